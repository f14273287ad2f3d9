//! Interactive read-eval-print loop.

use std::io::{self, Write};

use wisp_parse::EmitMode;

use crate::commands::evaluate_source;

/// Run the interactive loop until end of input or an exit command.
pub fn run(mode: EmitMode) {
    println!("Wisp {}", env!("CARGO_PKG_VERSION"));
    println!("Type an expression, or `exit` to leave.");

    let mut line = String::new();

    loop {
        print!("wisp> ");
        if io::stdout().flush().is_err() {
            return;
        }

        line.clear();
        match io::stdin().read_line(&mut line) {
            // Zero bytes read means the input is closed.
            Ok(0) | Err(_) => return,
            Ok(_) => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            return;
        }

        match evaluate_source(input, mode) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("error: {e}"),
        }
    }
}
