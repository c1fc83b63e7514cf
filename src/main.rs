//! lifegrid main entrypoint.

use lifegrid::run;
use lifegrid::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
