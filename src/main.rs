mod config;
mod error;
mod fetch;
mod parser;
mod pipeline;
mod render;

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::{info, warn};

use crate::config::Settings;
use crate::error::TarsierError;
use crate::fetch::HttpFetcher;
use crate::parser::links::RandomChooser;
use crate::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "tarsier", version, about = "Read the article of a web page in the terminal")]
struct Cli {
    /// Page to read; https:// is assumed when no scheme is given
    url: Option<String>,

    /// Pick a random link on the page and read that instead
    #[arg(short, long)]
    random: bool,

    /// Request timeout in seconds (default: TARSIER_TIMEOUT_SECS or 30)
    #[arg(long)]
    timeout: Option<u64>,

    /// Print without colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let Some(url) = cli.url.as_deref() else {
        print_usage();
        return ExitCode::SUCCESS;
    };
    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(url, &cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<TarsierError>() {
            Some(info) if info.is_informational() => {
                println!("Error: {}", info);
                print_usage();
                ExitCode::SUCCESS
            }
            _ => {
                println!("error running tarsier: {:#}", e);
                ExitCode::FAILURE
            }
        },
    }
}

fn print_usage() {
    if let Err(e) = Cli::command().write_help(&mut std::io::stderr()) {
        warn!("Failed to print usage: {}", e);
    }
}

fn run(url: &str, cli: &Cli) -> Result<()> {
    let mut settings = Settings::load()?;
    if let Some(secs) = cli.timeout {
        settings.timeout_secs = secs;
    }

    let fetcher = HttpFetcher::new(&settings)?;
    let mut pipeline = Pipeline::new(fetcher, RandomChooser);
    let reading = pipeline.read(url, cli.random, |link| println!("Reading link {}", link))?;

    info!("Read {} paragraphs from {}", reading.paragraphs.len(), reading.url);
    println!("{}", render::render(&reading.to_markup()));
    Ok(())
}
