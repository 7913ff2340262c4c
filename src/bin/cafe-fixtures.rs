//! cafe-fixtures CLI - writes the café chain's synthetic datasets and
//! prints summary reports over them.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use cafe_fixtures::catalog::templates::TEMPLATES;
use cafe_fixtures::output::{dataset_path, write_template};
use cafe_fixtures::summary::FinancialDataset;
use cafe_fixtures::{config, CafeFixtures, Dataset, DateBound, FixtureError};

#[derive(Parser)]
#[command(name = "cafe-fixtures")]
#[command(version, about = "Synthetic POS, roster and financial data for a four-location café chain", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate datasets and write them below the output directory
    Generate {
        /// Dataset to generate: all, financial, pos, roster, expenses,
        /// channel_revenues, income_statement, balance_sheet, cash_flow or templates
        #[arg(short, long, default_value = "all")]
        dataset: String,

        /// First calendar day (YYYY-MM-DD or "today")
        #[arg(short, long, value_parser = parse_bound)]
        start: Option<DateBound>,

        /// Last calendar day (YYYY-MM-DD or "today")
        #[arg(short, long, value_parser = parse_bound)]
        end: Option<DateBound>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print summary reports for the written datasets
        #[arg(long)]
        summary: bool,
    },

    /// Write the three statement template workbooks
    Templates {
        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print summary reports over previously written datasets
    Summary {
        /// Dataset to summarise: all, financial, pos, roster or a financial file name
        #[arg(short, long, default_value = "all")]
        dataset: String,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_bound(s: &str) -> Result<DateBound, String> {
    s.parse().map_err(|e: FixtureError| e.to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Generate {
            dataset,
            start,
            end,
            output,
            summary,
        } => generate(&dataset, start, end, output, summary),
        Commands::Templates { output } => templates(output),
        Commands::Summary { dataset, output } => summarise(&dataset, output),
    };
    process::exit(code);
}

fn fixtures(
    output: Option<PathBuf>,
    start: Option<DateBound>,
    end: Option<DateBound>,
) -> Result<CafeFixtures, FixtureError> {
    let mut builder = CafeFixtures::builder().output_dir(output.unwrap_or_else(config::default_output_dir));
    if let Some(start) = start {
        builder = builder.start(start);
    }
    if let Some(end) = end {
        builder = builder.end(end);
    }
    builder.build()
}

fn generate(
    selection: &str,
    start: Option<DateBound>,
    end: Option<DateBound>,
    output: Option<PathBuf>,
    summary: bool,
) -> i32 {
    let datasets = match Dataset::select(selection) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };
    let fixtures = match fixtures(output, start, end) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    println!(
        "Generating {} dataset(s) from {} to {} into {}",
        datasets.len(),
        fixtures.start(),
        fixtures.end(),
        fixtures.output_dir().display()
    );
    let report = fixtures.generate(&datasets);
    println!("{}", report);

    if summary {
        let written: Vec<Dataset> = report.succeeded.iter().map(|(d, _)| *d).collect();
        if !print_summaries(&fixtures, &written) {
            return 1;
        }
    }
    if report.is_success() {
        0
    } else {
        1
    }
}

fn templates(output: Option<PathBuf>) -> i32 {
    let root = output.unwrap_or_else(config::default_output_dir);
    for spec in TEMPLATES {
        let result = dataset_path(&root, spec.file_key).and_then(|path| {
            let rows = write_template(spec, &path)?;
            Ok((path, rows))
        });
        match result {
            Ok((path, rows)) => println!("  ✓ {} ({} rows) -> {}", spec.sheet_name, rows, path.display()),
            Err(FixtureError::FeatureDisabled(message)) => {
                eprintln!("Error: {}", message);
                eprintln!("Templates need XLSX support. Rebuild with: cargo build --features xlsx");
                return 3;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    }
    0
}

fn summarise(selection: &str, output: Option<PathBuf>) -> i32 {
    let datasets = match Dataset::select(selection) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };
    let fixtures = match fixtures(output, None, None) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    if print_summaries(&fixtures, &datasets) {
        0
    } else {
        1
    }
}

/// Print the report of each dataset that has one. Returns `false` if any
/// report could not be produced.
fn print_summaries(fixtures: &CafeFixtures, datasets: &[Dataset]) -> bool {
    let mut ok = true;
    for dataset in datasets {
        let report = match dataset {
            Dataset::Pos => fixtures.pos().summary().map(|s| s.to_string()),
            Dataset::Roster => fixtures.roster().summary().map(|s| s.to_string()),
            Dataset::Templates => continue,
            other => other
                .name()
                .parse::<FinancialDataset>()
                .and_then(|d| fixtures.financial().summary(d))
                .map(|s| s.to_string()),
        };
        match report {
            Ok(text) => println!("\n{}", text),
            Err(e) => {
                eprintln!("Error summarising {}: {}", dataset, e);
                ok = false;
            }
        }
    }
    ok
}
