//! issue2post CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the conversion and
//! exit with the matching status. For programmatic use, prefer the library
//! API (`issue2post::api`).

use clap::{CommandFactory, Parser};

mod cli;

fn main() {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = cli::clap_exit_code(&err);
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if let Err(err) = cli::run(args) {
        if err.shows_usage() {
            eprintln!("{}", cli::CliArgs::command().render_help());
        }
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }

    println!("DONE");
}
