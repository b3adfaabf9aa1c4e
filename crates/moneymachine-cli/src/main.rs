//! `moneymachine` binary entrypoint.

use std::process;

fn main() {
    process::exit(moneymachine_cli::run());
}
