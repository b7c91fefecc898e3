use anyhow::{bail, Context, Result};
use clap::Parser;
use cluster_count::cli::{Cli, Mode, OutputFormat, Pattern};
use cluster_count::report::{self, GridReport};
use cluster_count::validate::check_shape;
use cluster_count::{patterns, ClusterCounter, CounterConfig};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Built-in sample grids, or the single generated grid requested on the command line
///
/// A generated grid's shape is checked against `config` before it is allocated.
fn build_grids(cli: &Cli, config: &CounterConfig) -> Result<Vec<(String, Vec<Vec<bool>>)>> {
    let Some(pattern) = cli.pattern else {
        return Ok(vec![
            (
                "Sample 1".to_string(),
                patterns::from_rows(&["1000", "0110", "1101", "0011"]),
            ),
            (
                "Sample 2".to_string(),
                patterns::from_rows(&["10000", "10110", "01010", "01110", "00001"]),
            ),
        ]);
    };

    let name = format!("{:?}", pattern).to_lowercase();
    let (rows, cols) = (cli.rows, cli.cols);
    check_shape(rows, cols, config)
        .with_context(|| format!("Failed to count clusters in {}", name))?;

    let grid = match pattern {
        Pattern::Empty => patterns::empty(rows, cols),
        Pattern::Full => patterns::full(rows, cols),
        Pattern::Checkerboard => patterns::checkerboard(rows, cols),
        Pattern::Diagonals => patterns::diagonals(rows, cols),
        Pattern::Rings => patterns::rings(rows, cols),
        Pattern::Blocks => patterns::tiled_blocks(rows, cols, 5, 3),
        Pattern::Random => patterns::random(rows, cols, cli.density, cli.seed),
    };
    Ok(vec![(name, grid)])
}

/// Run the requested counting mode(s) over one grid
fn count_grid(
    counter: &ClusterCounter,
    name: String,
    mut grid: Vec<Vec<bool>>,
    mode: Mode,
) -> Result<GridReport> {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);

    let read_only = match mode {
        Mode::Both | Mode::ReadOnly => Some(
            counter
                .summarize(&grid)
                .with_context(|| format!("Failed to count clusters in {}", name))?,
        ),
        Mode::Mutating => None,
    };

    let mutating = match mode {
        Mode::Both | Mode::Mutating => Some(
            counter
                .count_mutating(&mut grid)
                .with_context(|| format!("Failed to count clusters in {} (mutating)", name))?,
        ),
        Mode::ReadOnly => None,
    };

    Ok(GridReport {
        name,
        rows,
        cols,
        read_only,
        mutating,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    if !(0.0..=1.0).contains(&cli.density) {
        bail!("--density must be between 0 and 1, got {}", cli.density);
    }

    let config = CounterConfig::default().with_max_frontier(cli.max_frontier);
    let counter = ClusterCounter::new(config)?;

    let mut reports = Vec::new();
    for (name, grid) in build_grids(&cli, counter.config())? {
        if cli.show_grid && cli.format == OutputFormat::Text {
            print!("{}", report::render_grid(&grid));
        }
        let grid_report = count_grid(&counter, name, grid, cli.mode)?;
        if cli.format == OutputFormat::Text {
            print!("{}", report::format_text(&grid_report));
        }
        reports.push(grid_report);
    }

    if cli.format == OutputFormat::Json {
        println!("{}", report::format_json(&reports)?);
    }

    Ok(())
}
