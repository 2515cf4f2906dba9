mod cli;

use dff2dsf::{convert, output_path};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let matches = cli::build_cli().get_matches();
    let inputs = matches
        .get_many::<PathBuf>("inputs")
        .expect("required argument");

    // one bad file must not stop the rest
    let mut failed = false;
    for input in inputs {
        let output = output_path(input);
        match convert(input, &output) {
            Ok(()) => println!("{} -> {}", input.display(), output.display()),
            Err(err) => {
                eprintln!("{}: {}", input.display(), err);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
