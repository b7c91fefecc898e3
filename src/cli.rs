//! CLI argument parsing for the cluster-count demo

use clap::{Parser, ValueEnum};

/// Output format for count reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

/// Which counting entry point(s) to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Read-only count first, then the mutating count on the same grid
    Both,
    /// Count without modifying the grid
    ReadOnly,
    /// Count while clearing the grid
    Mutating,
}

/// Generated grid shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    Empty,
    Full,
    Checkerboard,
    Diagonals,
    Rings,
    Blocks,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "cluster-count")]
#[command(version)]
#[command(about = "Count 4-connected clusters of active cells in boolean grids", long_about = None)]
pub struct Cli {
    /// Generate a grid instead of running the built-in samples
    #[arg(short = 'p', long = "pattern", value_enum)]
    pub pattern: Option<Pattern>,

    /// Rows of the generated grid
    #[arg(short = 'r', long = "rows", default_value = "50")]
    pub rows: usize,

    /// Columns of the generated grid
    #[arg(short = 'c', long = "cols", default_value = "50")]
    pub cols: usize,

    /// Probability of a cell being active (random pattern)
    #[arg(long = "density", value_name = "P", default_value = "0.5")]
    pub density: f64,

    /// RNG seed (random pattern)
    #[arg(long = "seed", default_value = "42")]
    pub seed: u64,

    /// Counting mode
    #[arg(short = 'm', long = "mode", value_enum, default_value = "both")]
    pub mode: Mode,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Frontier ceiling for a single cluster traversal
    #[arg(long = "max-frontier", value_name = "N", default_value = "100000")]
    pub max_frontier: usize,

    /// Print each grid before its counts (text format only)
    #[arg(long = "show-grid")]
    pub show_grid: bool,

    /// Enable debug tracing on stderr
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["cluster-count"]);
        assert!(cli.pattern.is_none());
        assert_eq!(cli.rows, 50);
        assert_eq!(cli.cols, 50);
        assert_eq!(cli.mode, Mode::Both);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.max_frontier, 100_000);
        assert!(!cli.show_grid);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_pattern_with_shape() {
        let cli = Cli::parse_from([
            "cluster-count",
            "--pattern",
            "checkerboard",
            "-r",
            "8",
            "-c",
            "12",
        ]);
        assert_eq!(cli.pattern, Some(Pattern::Checkerboard));
        assert_eq!(cli.rows, 8);
        assert_eq!(cli.cols, 12);
    }

    #[test]
    fn test_cli_mode_and_format() {
        let cli = Cli::parse_from(["cluster-count", "--mode", "read-only", "--format", "json"]);
        assert_eq!(cli.mode, Mode::ReadOnly);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_random_options() {
        let cli = Cli::parse_from([
            "cluster-count",
            "-p",
            "random",
            "--density",
            "0.3",
            "--seed",
            "9",
        ]);
        assert_eq!(cli.pattern, Some(Pattern::Random));
        assert_eq!(cli.density, 0.3);
        assert_eq!(cli.seed, 9);
    }

    #[test]
    fn test_cli_max_frontier() {
        let cli = Cli::parse_from(["cluster-count", "--max-frontier", "64"]);
        assert_eq!(cli.max_frontier, 64);
    }

    #[test]
    fn test_cli_rejects_unknown_pattern() {
        assert!(Cli::try_parse_from(["cluster-count", "--pattern", "spiral"]).is_err());
    }
}
