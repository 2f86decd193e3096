use std::io;
use std::sync::Arc;

use colored::Colorize;
use tokio::task::JoinSet;

use cask_bench::{BenchConfig, BenchmarkDriver, Scenario};
use cask_store::{FileStore, InMemoryFileStore};

use crate::cli::{Cli, Command, DemoArgs, OutputFormat, RunArgs, ScenarioArg};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Run(args) => cmd_run(args, &cli.format).await,
        Command::Demo(args) => cmd_demo(args).await,
    }
}

async fn cmd_run(args: RunArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let scenario = match args.scenario {
        ScenarioArg::Write => Scenario::Write,
        ScenarioArg::Read => Scenario::Read,
    };
    let config = BenchConfig {
        iterations: args.iterations,
        concurrency_levels: args.levels,
        admission_capacity: args.limit,
        scenario,
        payload: benchmark_payload(args.payload_size),
    };

    let driver = BenchmarkDriver::new(config)?;
    let result = driver.run().await?;

    match format {
        OutputFormat::Json => println!("{}", cask_report::render_json(&result)?),
        OutputFormat::Text => {
            let mut out = io::stdout().lock();
            cask_report::render_text(&result, &mut out)?;
        }
    }

    if let Some(path) = &args.plot {
        cask_report::render_svg(&result, path)?;
        println!(
            "{} Chart written to {}",
            "✓".green().bold(),
            path.display().to_string().bold()
        );
    }
    Ok(())
}

async fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let store = Arc::new(InMemoryFileStore::new());
    let ops = args.operations;

    // Reads against an empty store: every one surfaces NotFound.
    println!("{} concurrent reads against an empty store:", ops);
    read_phase(&store, ops).await?;

    println!("{} concurrent writes:", ops);
    let mut writers = JoinSet::new();
    for i in 0..ops {
        let store = Arc::clone(&store);
        writers.spawn(async move {
            let name = format!("file{i}.txt");
            let content = format!("Content{i}");
            let outcome = store.write(&name, content.as_bytes());
            (name, content, outcome)
        });
    }
    while let Some(joined) = writers.join_next().await {
        let (name, content, outcome) = joined?;
        match outcome {
            Ok(()) => println!("  {} {}: {}", "wrote".green(), name.bold(), content),
            Err(e) => println!("  {} {}", "error:".red(), e),
        }
    }

    // The same reads now find verified content.
    println!("{} concurrent reads after writing:", ops);
    read_phase(&store, ops).await?;

    Ok(())
}

async fn read_phase(store: &Arc<InMemoryFileStore>, ops: usize) -> anyhow::Result<()> {
    let mut readers = JoinSet::new();
    for i in 0..ops {
        let store = Arc::clone(store);
        readers.spawn(async move {
            let name = format!("file{i}.txt");
            let outcome = store.read(&name);
            (name, outcome)
        });
    }
    while let Some(joined) = readers.join_next().await {
        let (name, outcome) = joined?;
        match outcome {
            Ok(content) => println!(
                "  {} {}: {}",
                "read".green(),
                name.bold(),
                String::from_utf8_lossy(&content)
            ),
            Err(e) => println!("  {} {}", "error:".red(), e),
        }
    }
    Ok(())
}

/// Repeat the benchmark content marker out to `size` bytes.
fn benchmark_payload(size: usize) -> Vec<u8> {
    b"BenchmarkContent"
        .iter()
        .cycle()
        .take(size)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_has_requested_size() {
        assert_eq!(benchmark_payload(80).len(), 80);
        assert_eq!(benchmark_payload(7), b"Benchma".to_vec());
    }

    #[test]
    fn payload_may_be_empty() {
        assert!(benchmark_payload(0).is_empty());
    }
}
