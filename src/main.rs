use std::env;

use passgen::{cli, exits, logging, tui};

fn main() {
    exits::install_handlers();
    exits::harden_process();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            logging::init(logging::level(false, false));
            tui::run();
        }
        _ => std::process::exit(cli::run(args)),
    }
}
