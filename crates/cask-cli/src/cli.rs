use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "cask",
    about = "cask — concurrent in-memory file store benchmark",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a benchmark sweep against fresh stores
    Run(RunArgs),
    /// Demonstrate concurrent reads and writes against one shared store
    Demo(DemoArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Total operations per concurrency level
    #[arg(short, long, default_value = "100000")]
    pub iterations: u64,

    /// Concurrency levels to sweep (comma separated)
    #[arg(short, long, value_delimiter = ',', default_value = "2,5,20,100")]
    pub levels: Vec<usize>,

    /// Cap on in-flight store operations (ungated when omitted)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Operation to measure
    #[arg(long, default_value = "write")]
    pub scenario: ScenarioArg,

    /// Payload size in bytes for written entries
    #[arg(long, default_value = "80")]
    pub payload_size: usize,

    /// Write an SVG chart of per-level averages to this path
    #[arg(long)]
    pub plot: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ScenarioArg {
    Write,
    Read,
}

#[derive(Args)]
pub struct DemoArgs {
    /// Number of concurrent operations per phase
    #[arg(short, long, default_value = "5")]
    pub operations: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_defaults() {
        let cli = Cli::try_parse_from(["cask", "run"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.iterations, 100_000);
            assert_eq!(args.levels, vec![2, 5, 20, 100]);
            assert!(args.limit.is_none());
            assert!(matches!(args.scenario, ScenarioArg::Write));
            assert!(args.plot.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_run_levels_list() {
        let cli = Cli::try_parse_from(["cask", "run", "-l", "1,8,64"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.levels, vec![1, 8, 64]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_run_with_limit_and_scenario() {
        let cli =
            Cli::try_parse_from(["cask", "run", "--limit", "4", "--scenario", "read"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.limit, Some(4));
            assert!(matches!(args.scenario, ScenarioArg::Read));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_run_with_plot() {
        let cli = Cli::try_parse_from(["cask", "run", "--plot", "out.svg"]).unwrap();
        if let Command::Run(args) = cli.command {
            assert_eq!(args.plot, Some(PathBuf::from("out.svg")));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_demo() {
        let cli = Cli::try_parse_from(["cask", "demo", "-o", "8"]).unwrap();
        if let Command::Demo(args) = cli.command {
            assert_eq!(args.operations, 8);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["cask", "--verbose", "demo"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["cask", "--format", "json", "run"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
