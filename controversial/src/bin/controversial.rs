use clap::Parser;
use controversial::cli::Cli;
use controversial::{Config, Error, Report, YouTubeClient, error_kind, write_report};
use eyre::Context;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    match run(cli).await {
        Ok(report) => {
            tracing::debug!(?report, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            match error_kind(&e) {
                Some(Error::ChannelNotFound(_)) => println!("Channel not found"),
                Some(Error::InvalidCount(_)) => println!("Invalid result count"),
                _ => eprintln!("Error: {e:?}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> eyre::Result<Report> {
    let config = Config::from_env()?.with_timeout(cli.timeout());
    let count = cli.count()?;
    tracing::debug!(?config, channel = cli.channel, count, "starting");

    let client = YouTubeClient::new(config)?;
    let ranked = controversial::most_controversial(&client, &cli.channel).await?;

    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, &ranked, count).context("write report to stdout")
}
