//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = oche_cli::run() {
        eprintln!("oche: {err}");
        std::process::exit(1);
    }
}
