use anyhow::Context;
use clap::Parser;
use colored::*;
use std::path::Path;

use shquote_lib::config::{self, Config};
use shquote_lib::exit_codes::exit;
use shquote_lib::file_processor::{FixMode, process_file};
use shquote_lib::formatter;
use shquote_lib::rewriter::{RewriteOptions, Rewriter};

mod cli_types;

use cli_types::{Cli, Commands, FixArgs};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// CLI flags override config values, which override defaults
fn resolve_options(args: &FixArgs, config: &Config) -> RewriteOptions {
    RewriteOptions {
        marker: args.marker.clone().unwrap_or_else(|| config.rewrite.marker.clone()),
        from: args.from.unwrap_or(config.rewrite.from),
        to: args.to.unwrap_or(config.rewrite.to),
    }
}

/// Returns true when `--check` found blocks that would be rewritten
fn run(args: &FixArgs) -> anyhow::Result<bool> {
    let config = Config::load(args.config.as_deref())?;
    let options = resolve_options(args, &config);
    let rewriter = Rewriter::new(options).context("Invalid rewrite options")?;

    let path = args.path.as_deref().unwrap_or(config.global.path.as_path());
    let mode = args.fix_mode();
    log::debug!("Processing {} in {mode:?} mode", path.display());

    let outcome = process_file(path, &rewriter, mode)?;

    match mode {
        FixMode::Fix => {
            if outcome.written && !args.quiet {
                println!("{}", formatter::status_message(rewriter.options()));
            }
            Ok(false)
        }
        FixMode::Check => {
            if outcome.changed() && !args.quiet {
                println!("Would fix {}", outcome.path.display());
            }
            Ok(outcome.changed())
        }
        FixMode::Diff => {
            if let Some(diff) = &outcome.diff {
                print!("{}", formatter::colorize_diff(diff));
            }
            Ok(false)
        }
    }
}

fn handle_init(quiet: bool) {
    match config::create_default_config(Path::new(config::CONFIG_FILE)) {
        Ok(()) => {
            if !quiet {
                println!("Created default configuration file: {}", config::CONFIG_FILE);
            }
            exit::success();
        }
        Err(e) => {
            eprintln!("{}: Failed to create config file: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.fix.verbose);

    if let Some(Commands::Init) = cli.command {
        handle_init(cli.fix.quiet);
    }

    match run(&cli.fix) {
        Ok(true) => exit::changes_needed(),
        Ok(false) => exit::success(),
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
