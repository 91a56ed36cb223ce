//! Lesser command-line front end

use lesser::{CompilerError, LesserCli};
use std::process;

fn main() {
    let mut cli = LesserCli::new();

    match cli.run() {
        Ok(()) => {}
        Err(CompilerError::Io(e)) => {
            eprintln!("IO Error: {}", e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
