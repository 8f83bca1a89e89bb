use anyhow::{Context, Result, anyhow};
use clap::Parser;
use gdiff::areas::config::Settings;
use gdiff::areas::engine::Engine;
use gdiff::areas::viewer::{DisplayOptions, Viewer};
use gdiff::artifacts::comparison::filter::LineFilter;
use gdiff::artifacts::core::open_output;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "gdiff",
    version,
    about = "Compare two files line by line",
    long_about = "Compares two text files line by line and highlights the tokens \
    that changed inside each modified line. Whitespace and regex-matched fragments \
    can be ignored when deciding whether two lines are equal.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The original file")]
    file1: PathBuf,
    #[arg(index = 2, help = "The modified file")]
    file2: PathBuf,
    #[arg(short = 'w', long, help = "Ignore whitespace differences between lines")]
    ignore_whitespace: bool,
    #[arg(
        short = 'I',
        long = "ignore",
        value_name = "REGEX",
        help = "Strip matches of REGEX before comparing lines (repeatable)"
    )]
    ignore_patterns: Vec<String>,
    #[arg(
        short,
        long,
        help = "Tokenize lines as this language or extension instead of guessing from the file names"
    )]
    language: Option<String>,
    #[arg(
        long = "token-pattern",
        value_name = "EXT=REGEX",
        help = "Use REGEX to split lines of files with extension EXT (repeatable)"
    )]
    token_patterns: Vec<String>,
    #[arg(short, long, help = "Read settings from this file instead of ./.gdiff.toml")]
    config: Option<PathBuf>,
    #[arg(short = 'n', long, help = "Hide line numbers")]
    no_line_numbers: bool,
    #[arg(long, help = "Print a summary of added, removed and unchanged lines")]
    stat: bool,
    #[arg(
        long,
        value_name = "[AER]+",
        help = "Only show Added (A), Equal (E) or Removed (R) lines"
    )]
    filter: Option<String>,
    #[arg(long, help = "Write directly to stdout even on a terminal")]
    no_pager: bool,
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors")]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn parse_token_pattern(raw: &str) -> Result<(String, String)> {
    let (ext, pattern) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("invalid token pattern '{raw}', expected EXT=REGEX"))?;

    if ext.is_empty() {
        return Err(anyhow!("missing extension in token pattern '{raw}'"));
    }

    Ok((ext.to_string(), pattern.to_string()))
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_explicit(path)?,
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            Settings::load_implicit(&cwd)
        }
    };

    if cli.language.is_some() {
        settings.language = cli.language.clone();
    }
    settings.ignore_whitespace |= cli.ignore_whitespace;
    settings
        .ignore_patterns
        .extend(cli.ignore_patterns.iter().cloned());
    for raw in &cli.token_patterns {
        let (ext, pattern) = parse_token_pattern(raw)?;
        settings.token_patterns.insert(ext, pattern);
    }
    if cli.no_line_numbers {
        settings.line_numbers = Some(false);
    }
    if cli.no_pager {
        settings.pager = Some(false);
    }

    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let settings = load_settings(&cli)?;

    let filter = match &cli.filter {
        Some(raw) => LineFilter::try_parse(raw)
            .ok_or_else(|| anyhow!("invalid filter '{raw}', expected letters from A, E, R"))?,
        None => LineFilter::default(),
    };
    let display = DisplayOptions::new(settings.line_numbers.unwrap_or(true), filter, cli.stat);

    let (writer, pager) = open_output(!settings.pager.unwrap_or(true));
    let viewer = Viewer::new(Engine::new(settings.engine_options()), display, writer);

    viewer.compare(&cli.file1, &cli.file2)?;

    if let Some(pager) = pager {
        drop(viewer);
        minus::page_all(pager)?;
    }

    Ok(())
}
