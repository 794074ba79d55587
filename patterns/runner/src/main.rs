//! Interview pattern runner
//!
//! Run with: cargo run --bin patterns -- run --all

mod catalog;
mod cli;

use anyhow::{Context, Result};
use patterns_common::{telemetry, Pattern};
use tracing::{debug, info};

use catalog::Exercise;
use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    telemetry::init_tracing(cli.verbose);

    match cli.command {
        Command::List { pattern, json } => list(pattern, json),
        Command::Run { slugs, all } => run(&slugs, all),
    }
}

fn list(pattern: Option<Pattern>, json: bool) -> Result<()> {
    let exercises = catalog::filter(pattern);
    debug!(count = exercises.len(), ?pattern, "listing exercises");

    if json {
        let infos: Vec<_> = exercises.iter().map(|ex| ex.info).collect();
        let rendered = serde_json::to_string_pretty(&infos).context("serializing catalog")?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "{:<52} | {:<19} | {:<6} | {:>8} | {}",
        "exercise", "pattern", "level", "leetcode", "time / space"
    );
    println!("{}", "=".repeat(110));
    for ex in &exercises {
        let info = ex.info;
        println!(
            "{:<52} | {:<19} | {:<6} | {:>8} | {} / {}",
            info.slug,
            info.pattern.slug(),
            info.difficulty.to_string(),
            info.leetcode,
            info.time,
            info.space
        );
    }
    Ok(())
}

fn run(slugs: &[String], all: bool) -> Result<()> {
    let selected: Vec<Exercise> = if all {
        catalog::catalog()
    } else {
        slugs
            .iter()
            .map(|slug| catalog::find(slug))
            .collect::<patterns_common::Result<_>>()?
    };

    for ex in selected {
        let info = ex.info;
        println!("{}: {}", info.pattern, info.title);
        let lines = (ex.run)().with_context(|| format!("running {}", info.slug))?;
        for line in &lines {
            println!("  {line}");
        }
        info!(slug = info.slug, samples = lines.len(), "exercise finished");
    }
    Ok(())
}
