//! teamcal main entrypoint.

use teamcal::run;
use teamcal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
