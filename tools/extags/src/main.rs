//! extags CLI
//!
//! Generates ctags-compatible tag files for Elixir sources.

use extags::{generate_tags, init_tracing, list_kinds, list_maps, parse_args, usage, Command};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("extags: {e}");
            eprintln!("Try 'extags --help' for more information.");
            std::process::exit(2);
        }
    };

    match command {
        Command::Help => print!("{}", usage()),
        Command::Version => println!("extags {}", env!("CARGO_PKG_VERSION")),
        Command::ListMaps => print!("{}", list_maps()),
        Command::ListKinds(options) => print!("{}", list_kinds(options.scan.kinds)),
        Command::Generate(options) => {
            init_tracing(options.verbose);
            match generate_tags(&options) {
                Ok(summary) => {
                    tracing::info!(files = summary.files, tags = summary.tags, "done");
                }
                Err(e) => {
                    eprintln!("extags: {e}");
                    std::process::exit(if e.is_usage() { 2 } else { 1 });
                }
            }
        }
    }
}
