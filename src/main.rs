//! testassure fixture generator
//!
//! Prints randomly generated fixture values as JSON, using the same generators
//! the library exposes to tests:
//! - integers and floats within a range
//! - alphanumeric strings, booleans and dates
//! - picks from a list of candidates
//!
//! Run with: cargo run -- --seed 42 --count 5 integer --min 1 --max 6
//! Logs go to stderr; stdout carries only the JSON document.

use chrono::{DateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use testassure::{config, DataError, FixtureRng};
use tracing::{error, info, info_span};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for the fixture generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for reproducible output (defaults to TESTASSURE_SEED, then entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of values to generate
    #[arg(long, default_value_t = config::DEFAULT_COUNT)]
    count: usize,

    /// Increase output verbosity (-v for DEBUG, -vv for TRACE)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    kind: FixtureKind,
}

/// Kind of value to generate
#[derive(Subcommand, Debug)]
enum FixtureKind {
    /// Integers in [min, max]
    Integer {
        #[arg(long, allow_hyphen_values = true)]
        min: i64,
        #[arg(long, allow_hyphen_values = true)]
        max: i64,
    },
    /// Floats in [min, max)
    Float {
        #[arg(long, allow_hyphen_values = true)]
        min: f64,
        #[arg(long, allow_hyphen_values = true)]
        max: f64,
    },
    /// Alphanumeric strings
    String {
        #[arg(long, default_value_t = config::DEFAULT_STRING_LENGTH)]
        length: usize,
    },
    /// Booleans
    Boolean,
    /// RFC 3339 instants in [start, end]
    Date {
        #[arg(long)]
        start: DateTime<Utc>,
        #[arg(long)]
        end: DateTime<Utc>,
    },
    /// Items chosen from the given candidates
    Pick {
        #[arg(required = true)]
        items: Vec<String>,
    },
}

/// Document printed to stdout
#[derive(Serialize, Debug)]
struct FixtureBatch {
    seed: u64,
    values: Vec<Value>,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose);

    let rng = match cli.seed {
        Some(seed) => Ok(FixtureRng::seeded(seed)),
        None => FixtureRng::from_env(),
    };

    let batch = rng.and_then(|mut rng| generate(&mut rng, &cli.kind, cli.count));
    let batch = match batch {
        Ok(batch) => batch,
        Err(err) => {
            error!("Error: {err}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&batch) {
        Ok(document) => println!("{document}"),
        Err(err) => {
            error!("Error: failed to serialize fixtures: {err}");
            std::process::exit(1);
        }
    }
}

fn generate(
    rng: &mut FixtureRng,
    kind: &FixtureKind,
    count: usize,
) -> Result<FixtureBatch, DataError> {
    let _span = info_span!("generate", seed = rng.seed(), count).entered();

    let values = rng
        .array(count, |rng| generate_one(rng, kind))
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    info!("Generated {} fixture value(s)", values.len());
    Ok(FixtureBatch {
        seed: rng.seed(),
        values,
    })
}

fn generate_one(rng: &mut FixtureRng, kind: &FixtureKind) -> Result<Value, DataError> {
    Ok(match kind {
        FixtureKind::Integer { min, max } => json!(rng.integer(*min, *max)?),
        FixtureKind::Float { min, max } => json!(rng.float(*min, *max)?),
        FixtureKind::String { length } => json!(rng.string(*length)),
        FixtureKind::Boolean => json!(rng.boolean()),
        FixtureKind::Date { start, end } => json!(rng.date(*start, *end)?),
        FixtureKind::Pick { items } => json!(rng.element(items)),
    })
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn,testassure=info",
        1 => "info,testassure=debug",
        _ => "testassure=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    use tracing_tree::HierarchicalLayer;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            HierarchicalLayer::new(2)
                .with_targets(false)
                .with_bracketed_fields(true),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_negative_bounds() {
        let cli = Cli::try_parse_from([
            "testassure", "--seed", "9", "--count", "3", "integer", "--min", "-5", "--max", "5",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(9));
        assert!(matches!(cli.kind, FixtureKind::Integer { min: -5, max: 5 }));
    }

    #[test]
    fn test_generate_is_reproducible_for_a_seed() {
        let kind = FixtureKind::Pick {
            items: vec!["red".into(), "green".into(), "blue".into()],
        };
        let first = generate(&mut FixtureRng::seeded(11), &kind, 8).unwrap();
        let second = generate(&mut FixtureRng::seeded(11), &kind, 8).unwrap();
        assert_eq!(first.values, second.values);
        assert_eq!(first.seed, 11);
    }

    #[test]
    fn test_generate_reports_invalid_range() {
        let kind = FixtureKind::Float { min: 2.0, max: 1.0 };
        let err = generate(&mut FixtureRng::seeded(1), &kind, 2).unwrap_err();
        assert!(matches!(err, DataError::InvalidRange { .. }));
    }

    #[test]
    fn test_generate_dates_serialize_as_rfc3339() {
        let start: DateTime<Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        let kind = FixtureKind::Date { start, end: start };
        let batch = generate(&mut FixtureRng::seeded(3), &kind, 1).unwrap();
        assert_eq!(batch.values, vec![json!("2024-01-01T00:00:00Z")]);
    }
}
