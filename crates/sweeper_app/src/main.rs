mod config;
mod logging;

use std::io::{self, BufReader};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use sweeper_core::RuleSet;
use sweeper_engine::{spawn_control_reader, FilterLoop, LoopSummary, WebDriverPage, WebDriverSettings};
use sweeper_logging::sweep_info;
use tokio::sync::mpsc;

use config::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize(cli.log, cli.verbose);

    let rules = cli.rule_set().context("loading initial rules")?;
    sweep_info!(
        "Starting with {} company, {} title, {} location patterns, remove disabled: {}",
        rules.companies().len(),
        rules.titles().len(),
        rules.locations().len(),
        rules.remove_disabled()
    );

    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    runtime.block_on(run(cli.webdriver_settings(), rules, cli.scan_interval()))?;
    Ok(())
}

async fn run(
    settings: WebDriverSettings,
    rules: RuleSet,
    scan_interval: Duration,
) -> Result<LoopSummary> {
    let page = WebDriverPage::new(settings).context("configuring webdriver client")?;
    let url = page
        .current_url()
        .await
        .context("attaching to webdriver session")?;
    sweep_info!("Attached to session showing {}", url);
    eprintln!("Commands: l<location>  c<company>  t<title>  q to quit");

    // Capacity 1: at most one line waits for the loop.
    let (tx, rx) = mpsc::channel(1);
    spawn_control_reader(BufReader::new(io::stdin()), tx);

    let summary = FilterLoop::new(page, rules)
        .with_scan_interval(scan_interval)
        .run(rx)
        .await;
    Ok(summary)
}
