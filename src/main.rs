//! rFatTracker main entrypoint.

use rfattracker::run;
use rfattracker::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
