//! Monkey interpreter CLI.

use monkeyc::commands::{lex_file, parse_file, run_file};

fn main() {
    monkeyc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        start_repl();
        return;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey run <file.mk>");
                std::process::exit(1);
            };
            run_file(path);
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey parse <file.mk>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: monkey lex <file.mk>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "repl" => start_repl(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-v" => {
            println!("Monkey {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // If it looks like a file path, try to run it
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("mk"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn start_repl() {
    println!("Monkey {} (:help for commands)", env!("CARGO_PKG_VERSION"));
    if let Err(e) = monkeyc::repl::start() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Monkey interpreter");
    println!();
    println!("Usage: monkey [command] [file]");
    println!();
    println!("Commands:");
    println!("  run <file.mk>     Run a Monkey program");
    println!("  parse <file.mk>   Parse and print the canonical source");
    println!("  lex <file.mk>     Tokenize and print tokens");
    println!("  repl              Start the REPL (default with no arguments)");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Examples:");
    println!("  monkey run fib.mk");
    println!("  monkey fib.mk                  # same as run");
    println!("  RUST_LOG=monkey_eval=debug monkey run macros.mk");
}
