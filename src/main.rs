use std::env::args_os;
use std::process::ExitCode;

use transparency::{recover_transparency, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match recover_transparency(&arguments) {
        Ok(_) => {
            println!("Output: {}", arguments.output_file().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Transparency recovery failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
