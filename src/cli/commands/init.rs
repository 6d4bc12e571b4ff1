use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{AbsenceStore, SqliteStore};
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing teamcal…");
    println!("🗄️  Database   : {}", &db_path);

    let mut store = SqliteStore::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);
    if store.migrations_applied() > 0 {
        success(format!("Migrations applied: {}", store.migrations_applied()));
    }

    if let Err(e) = store.audit(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 teamcal initialization completed!");
    Ok(())
}
