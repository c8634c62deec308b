use anyhow::Context;
use clap::{Parser, Subcommand};
use roomatch::{
    find_profile, generate_population, load_population, CompatibilityScorer, EligibilityCondition,
    MatchRanker, MatchStats, PopulationClusterer, Profile, SampleConfig, ScorerOptions,
    SleepMetric, WeightConfig,
};
use roomatch_cluster::DEFAULT_MAX_ITERATIONS;
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Roommate compatibility matching and population clustering
#[derive(Parser, Debug)]
#[command(name = "roomatch")]
#[command(about = "Roommate compatibility matching and clustering", long_about = None)]
struct Args {
    /// JSON file holding an array of profiles
    #[arg(short, long, global = true)]
    population: Option<PathBuf>,

    /// Size of the generated sample population, used when no file is given
    #[arg(long, default_value_t = 50, global = true)]
    sample: usize,

    /// Seed for the generated sample population
    #[arg(long, default_value_t = 42, global = true)]
    seed: u64,

    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the best matches for one profile
    Match {
        /// Id of the target profile
        #[arg(long)]
        target: String,

        /// Number of matches to return
        #[arg(long, default_value_t = 8)]
        top: usize,

        /// JSON weight configuration
        #[arg(long)]
        weights: Option<PathBuf>,

        /// Measure bedtime differences around the clock
        #[arg(long)]
        circular_sleep: bool,

        /// Drop the same-gender requirement
        #[arg(long)]
        any_gender: bool,
    },
    /// Partition the population into behavioral clusters
    Cluster {
        /// Number of clusters
        #[arg(short, default_value_t = 3)]
        k: usize,

        #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,
    },
    /// Score a single pair of profiles
    Score {
        #[arg(long)]
        a: String,

        #[arg(long)]
        b: String,

        #[arg(long)]
        weights: Option<PathBuf>,

        #[arg(long)]
        circular_sleep: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let population = match &args.population {
        Some(path) => load_population(path)
            .with_context(|| format!("failed to load population from {}", path.display()))?,
        None => {
            info!(size = args.sample, seed = args.seed, "generating sample population");
            generate_population(&SampleConfig::new(args.sample, args.seed))
        }
    };

    let output = match args.command {
        Command::Match {
            target,
            top,
            weights,
            circular_sleep,
            any_gender,
        } => {
            let target = lookup(&population, &target)?;
            let scorer = build_scorer(weights, circular_sleep)?;
            let ranker = MatchRanker::new(scorer);
            let eligibility = if any_gender {
                EligibilityCondition::Any
            } else {
                EligibilityCondition::SameGender
            };

            let candidates = ranker.eligible(target, &population, &eligibility).len();
            let matches = ranker.find_best_matches(target, &population, top, &eligibility);
            let stats = MatchStats::compute(&matches, candidates);

            let entries: Vec<_> = matches
                .iter()
                .map(|m| {
                    json!({
                        "id": m.profile.id,
                        "score": m.score,
                        "tier": m.tier(),
                        "bedtime": m.profile.bedtime_label(),
                        "breakdown": m.breakdown.dimensions,
                    })
                })
                .collect();

            json!({ "target": target.id, "stats": stats, "matches": entries })
        }
        Command::Cluster { k, max_iterations } => {
            let assignment = PopulationClusterer::new()
                .with_max_iterations(max_iterations)
                .cluster(&population, k)?;

            let clusters: Vec<_> = assignment
                .summaries()
                .into_iter()
                .map(|s| {
                    let ids: Vec<_> = s.members.iter().map(|i| &population[*i].id).collect();
                    json!({
                        "cluster": s.cluster,
                        "size": s.size,
                        "centroid": s.centroid.as_slice(),
                        "members": ids,
                    })
                })
                .collect();

            json!({
                "k": assignment.k(),
                "iterations": assignment.iterations(),
                "converged": assignment.converged(),
                "inertia": assignment.inertia(),
                "clusters": clusters,
            })
        }
        Command::Score {
            a,
            b,
            weights,
            circular_sleep,
        } => {
            let a = lookup(&population, &a)?;
            let b = lookup(&population, &b)?;
            let breakdown = build_scorer(weights, circular_sleep)?.breakdown(a, b);
            json!({
                "a": a.id,
                "b": b.id,
                "score": breakdown.score,
                "tier": breakdown.tier(),
                "breakdown": breakdown.dimensions,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn lookup<'a>(population: &'a [Profile], id: &str) -> anyhow::Result<&'a Profile> {
    find_profile(population, id).with_context(|| format!("profile '{}' not found", id))
}

fn build_scorer(weights: Option<PathBuf>, circular_sleep: bool) -> anyhow::Result<CompatibilityScorer> {
    let weights = match weights {
        Some(path) => WeightConfig::from_json_file(&path)
            .with_context(|| format!("failed to load weights from {}", path.display()))?,
        None => WeightConfig::default(),
    };
    let options = ScorerOptions {
        sleep_metric: if circular_sleep {
            SleepMetric::Circular
        } else {
            SleepMetric::Linear
        },
    };
    info!(?weights, ?options, "scorer configured");
    Ok(CompatibilityScorer::with_options(weights, options)?)
}
