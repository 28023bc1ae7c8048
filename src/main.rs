use std::process::exit;

use gclone::cli::cli;
use gclone::{handle, init_logger};

fn main() {
    let matches = cli().get_matches();
    init_logger(matches.get_count("verbose"));

    match handle(&matches) {
        Ok(path) => {
            eprintln!();
            eprintln!();

            println!("{}", path.display());
        }
        Err(err) => {
            eprintln!("error: {err}");
            exit(err.exit_code());
        }
    }
}
