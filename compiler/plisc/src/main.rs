//! `plis` - interactive interpreter for the plis list language.

use std::io::IsTerminal;
use std::process::ExitCode;

use plisc::{init_tracing, CliAction, ReplConfig, Session};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config = match ReplConfig::from_args(&args) {
        Ok(CliAction::Repl(config)) => config,
        Ok(CliAction::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Ok(CliAction::Version) => {
            println!("plis {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            return ExitCode::from(2);
        }
    };

    init_tracing();

    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        config.prompt = None;
    }

    let mut session = Session::new(&config);
    if let Err(err) = session.run(stdin.lock()) {
        eprintln!("error: failed to read input: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn print_usage() {
    println!("plis - a tiny list-language interpreter");
    println!();
    println!("Usage: plis [options]");
    println!();
    println!("Reads one expression per line, e.g. (sum 1 (sum 2 3)) or (say 1 2).");
    println!("A line starting with 'q' quits.");
    println!();
    println!("Options:");
    println!("  --dump-ast           Print each parsed tree before evaluating it");
    println!("  --max-depth=<n>      Maximum list nesting (default: 10000)");
    println!("  --prompt=<text>      Prompt to print (default: '> ')");
    println!("  --no-prompt          Print no prompt (implied when stdin is not a terminal)");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show the version");
    println!();
    println!("Set PLIS_LOG (or RUST_LOG) to enable tracing, e.g. PLIS_LOG=plis_eval=trace.");
}
