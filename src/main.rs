use clap::Parser;
use git_util::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute_command(cli) {
        eprintln!("git-util: {}", e);
        std::process::exit(1);
    }
}
