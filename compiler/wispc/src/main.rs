//! Wisp CLI.
//!
//! Expression engine driver: evaluate, inspect, or tokenize a single
//! expression, or start the interactive loop.

use wisp_parse::EmitMode;
use wispc::commands::{eval_expr, lex_expr, parse_expr};
use wispc::repl;

fn main() {
    wispc::init_tracing();

    let mut args: Vec<String> = std::env::args().skip(1).collect();

    // The emission flag applies to every command, so it is pulled out
    // before dispatch.
    let mode = match args.iter().position(|a| a == "--chained") {
        Some(i) => {
            args.remove(i);
            EmitMode::Chained
        }
        None => EmitMode::Stacked,
    };

    if args.is_empty() {
        repl::run(mode);
        return;
    }

    let command = args[0].as_str();

    match command {
        "repl" => {
            repl::run(mode);
        }
        "eval" => {
            if args.len() < 2 {
                eprintln!("Usage: wisp eval <expression>");
                std::process::exit(1);
            }
            eval_expr(&join_expr(&args[1..]), mode);
        }
        "parse" => {
            if args.len() < 2 {
                eprintln!("Usage: wisp parse <expression>");
                std::process::exit(1);
            }
            parse_expr(&join_expr(&args[1..]), mode);
        }
        "lex" => {
            if args.len() < 2 {
                eprintln!("Usage: wisp lex <expression>");
                std::process::exit(1);
            }
            lex_expr(&join_expr(&args[1..]));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Wisp {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Join expression words so shell quoting is optional: `wisp eval 1 + 2`.
fn join_expr(args: &[String]) -> String {
    args.join(" ")
}

fn print_usage() {
    println!("Wisp expression engine");
    println!();
    println!("Usage: wisp [--chained] <command> [expression]");
    println!();
    println!("Commands:");
    println!("  repl                 Start the interactive loop (default)");
    println!("  eval <expression>    Evaluate an expression");
    println!("  parse <expression>   Build and display the execution scope");
    println!("  lex <expression>     Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --chained            Use the legacy chained node emission");
    println!();
    println!("Examples:");
    println!("  wisp eval \"(1 + 2) * 3\"");
    println!("  wisp parse \"1 + 2 * 3\"");
    println!("  wisp --chained eval \"(1 + 2) * (3 + 4)\"");
    println!("  wisp lex \"1_000 / 2.5\"");
}
