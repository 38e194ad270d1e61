//! rRegister main entrypoint.

use rregister::run;
use rregister::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
