// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod logger;

use std::{path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use clap::Subcommand;
use colored::Colorize;
use log::LevelFilter;
use logger::Logger;
use rangejoin::{ConfigRoot, Constants, SliceJoinExt};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,

    /// Configuration file, defaults to `rangejoin.toml` in the working directory
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Join the elements in `start..end` with a separator
    Join(JoinArgs),
}

#[derive(clap::Args, Debug)]
struct JoinArgs {
    #[arg(short, long)]
    separator: Option<String>,

    /// Elements equal to this marker are left out, but keep their separator
    #[arg(short, long)]
    absent: Option<String>,

    #[arg(long)]
    start: Option<usize>,

    #[arg(long)]
    end: Option<usize>,

    /// Elements may start with `-`, e.g. negative numbers
    #[arg(allow_hyphen_values = true)]
    elements: Vec<String>,
}

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("{}: {e:#}", "error".red().bold());
        exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;

    let level = if args.verbose || config.log.debug {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    };
    Logger::initialize(level);

    match args.command {
        Commands::Join(join_args) => {
            let joined = join_command(join_args, &config)?;
            println!("{joined}");
        }
    }

    Ok(())
}

/// Flags win over the `[join]` section of the configuration.
fn join_command(args: JoinArgs, config: &ConfigRoot) -> anyhow::Result<String> {
    let separator = args.separator.as_deref().unwrap_or(&config.join.separator);
    let absent = args.absent.as_deref().or(config.join.absent_marker.as_deref());

    let elements = mark_absent(args.elements, absent);
    let range = args.start.unwrap_or(0)..args.end.unwrap_or(elements.len());
    log::info!("Joining {range:?} of {} element(s) with {separator:?}", elements.len());

    Ok(elements.try_join_range(separator, range)?)
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ConfigRoot> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let path = PathBuf::from(Constants::CONFIG_FILE_NAME);
            if !path.exists() {
                return Ok(ConfigRoot::default());
            }
            path
        }
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    ConfigRoot::from_toml_str(&contents)
        .with_context(|| format!("failed to load {}", path.display()))
}

fn mark_absent(elements: Vec<String>, marker: Option<&str>) -> Vec<Option<String>> {
    elements.into_iter()
        .map(|element| {
            if Some(element.as_str()) == marker {
                None
            } else {
                Some(element)
            }
        })
        .collect()
}
