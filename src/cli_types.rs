use clap::{Args, Parser, Subcommand};
use shquote_lib::QuoteStyle;
use shquote_lib::file_processor::FixMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub fix: FixArgs,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a default .shquote.toml in the current directory
    Init,
}

#[derive(Args, Debug)]
pub struct FixArgs {
    /// File to rewrite (default: global.path from config, or Jenkinsfile)
    #[arg(required = false)]
    pub path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Step name that introduces a triple-quoted block
    #[arg(short, long)]
    pub marker: Option<String>,

    /// Quote style to replace
    #[arg(long, value_enum)]
    pub from: Option<QuoteStyle>,

    /// Quote style to write
    #[arg(long, value_enum)]
    pub to: Option<QuoteStyle>,

    /// Exit with code 1 if the file would be rewritten, without writing it
    #[arg(long, conflicts_with = "diff", help = "Exit with code 1 if any blocks would be rewritten (for CI)")]
    pub check: bool,

    /// Show diff of what would be rewritten instead of rewriting the file
    #[arg(long, help = "Show diff of what would be rewritten instead of rewriting the file")]
    pub diff: bool,

    /// Print nothing but errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Show detailed output
    #[arg(short, long)]
    pub verbose: bool,
}

impl FixArgs {
    pub fn fix_mode(&self) -> FixMode {
        if self.check {
            FixMode::Check
        } else if self.diff {
            FixMode::Diff
        } else {
            FixMode::Fix
        }
    }
}
