//! cribbage CLI - Command-line interface for the cribbage discard solver
//!
//! This binary parses card tokens, runs the discard evaluation and prints the
//! ranked tables. It also exposes single-hand scoring and a scoring benchmark.

mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cribbage_discard::{evaluate_with, EvaluationConfig, DEFAULT_DISCARD_SIZE};
use cribbage_engine::score::benchmark_throughput;
use cribbage_engine::{Card, HandScorer, ShowScorer};
use log::LevelFilter;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "cribbage", version)]
#[command(about = "Rank cribbage discards by expected hand and crib score")]
struct Args {
    /// Log every evaluated discard option
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate every discard of a hand
    Analyse {
        /// Cards in hand, e.g. 5D 9C XS JC QC KS
        #[arg(value_name = "CARD", required = true)]
        cards: Vec<String>,

        /// Number of cards thrown to the crib
        #[arg(short = 'd', long = "discard", default_value_t = DEFAULT_DISCARD_SIZE)]
        discard: usize,

        /// Rows per table (ties with the last row are also shown)
        #[arg(short = 'n', long = "top", default_value_t = 4)]
        top: usize,

        /// Print suit symbols instead of letters
        #[arg(short = 's', long = "symbols")]
        symbols: bool,

        /// Print the evaluations as JSON instead of tables
        #[arg(long = "json")]
        json: bool,

        /// Print the score histogram of every option
        #[arg(long = "histogram")]
        histogram: bool,

        /// Worker threads (default: one per core)
        #[arg(short = 't', long = "threads")]
        threads: Option<usize>,
    },
    /// Score one hand against a starter
    Score {
        /// The four hand cards
        #[arg(value_name = "CARD", num_args = 4, required = true)]
        hand: Vec<String>,

        /// The starter card
        #[arg(long = "starter")]
        starter: String,

        /// Print suit symbols instead of letters
        #[arg(short = 's', long = "symbols")]
        symbols: bool,
    },
    /// Measure scoring throughput
    Bench {
        /// Number of hands to score
        #[arg(default_value_t = 1_000_000)]
        samples: usize,
    },
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

fn parse_card(token: &str) -> Result<Card> {
    token
        .parse::<Card>()
        .with_context(|| format!("invalid card '{}'", token))
}

fn parse_cards(tokens: &[String]) -> Result<Vec<Card>> {
    tokens.iter().map(|token| parse_card(token)).collect()
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    match args.command {
        Command::Analyse {
            cards,
            discard,
            top,
            symbols,
            json,
            histogram,
            threads,
        } => {
            let start = Instant::now();
            let hand = parse_cards(&cards)?;
            let config = EvaluationConfig::new()
                .with_discard_size(discard)
                .with_threads(threads);
            let evaluations = evaluate_with(&ShowScorer::new(), &hand, &config)
                .context("evaluate discards")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&evaluations)?);
            } else {
                print!("{}", report::rankings(&evaluations, top, symbols));
                if histogram {
                    print!("{}", report::histograms(&evaluations, symbols));
                }
            }
            log::info!("{:<32}{:<32}", "finished", format!("{:.2?}", start.elapsed()));
        }
        Command::Score {
            hand,
            starter,
            symbols,
        } => {
            let hand = parse_cards(&hand)?;
            let starter = parse_card(&starter)?;
            let score = ShowScorer::new()
                .breakdown(&hand, starter)
                .context("score hand")?;
            print!("{}", report::breakdown(&hand, starter, &score, symbols));
        }
        Command::Bench { samples } => {
            log::info!("{:<32}{:<32}", "running scoring benchmark", samples);
            let (scores_per_sec, duration_ms) =
                benchmark_throughput(samples).context("run scoring benchmark")?;

            println!("Results:");
            println!("  Duration: {} ms", duration_ms);
            println!("  Throughput: {:.2} scores/sec", scores_per_sec);
            println!("  Throughput: {:.2}M scores/sec", scores_per_sec / 1_000_000.0);
        }
    }
    Ok(())
}
