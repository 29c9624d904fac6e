use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-util")]
#[command(about = "Utility for common Git maintenance operations")]
#[command(
    version,
    long_about = "When run without a subcommand, lists (or deletes with --delete) local \
branches already merged into the main branch of the current repository"
)]
pub struct Cli {
    #[command(flatten)]
    pub clean: CleanArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report the status of every Git repository under a directory
    Status(StatusArgs),
    /// Fetch or pull every Git repository under a directory
    Sync(SyncArgs),
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Target main branch (detects 'main' or 'master' when omitted)
    #[arg(long = "main", short = 'm', value_name = "BRANCH")]
    pub main_branch: Option<String>,

    /// Delete the merged branches instead of only listing them
    #[arg(long, short = 'd')]
    pub delete: bool,

    /// Show what would be deleted without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Directory to scan for Git repositories (defaults to the current directory)
    #[arg(long, short = 'D', value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Directory to scan for Git repositories (defaults to the current directory)
    #[arg(long, short = 'D', value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Sync action to perform: 'fetch' or 'pull'
    #[arg(long, short = 'a', default_value = "fetch", value_name = "ACTION")]
    pub action: String,
}
