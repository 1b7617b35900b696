use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use pipeline::config::{DEFAULT_N_TEST, DEFAULT_THRESHOLD, DEFAULT_USER_CAP};
use pipeline::{get_dataset, Dataset, MovieLensDataset, PipelineConfig, PreparedData};
use std::path::PathBuf;
use std::time::Instant;

/// movielens-prep - Prepare MovieLens ratings for model training
#[derive(Parser)]
#[command(name = "movielens-prep")]
#[command(about = "Build binarized train/test datasets from MovieLens CSV files", long_about = None)]
struct Cli {
    /// Directory containing movies.csv, ratings.csv and tags.csv
    #[arg(short, long, default_value = "data/ml-latest-small")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline and print a summary of both splits
    Prepare {
        #[command(flatten)]
        options: PipelineOptions,
    },

    /// Print a single example from one split
    Item {
        /// Which split to read from
        #[arg(long, value_enum, default_value = "train")]
        split: Split,

        /// Position of the example in the split
        #[arg(long)]
        index: usize,

        #[command(flatten)]
        options: PipelineOptions,
    },
}

#[derive(Args)]
struct PipelineOptions {
    /// Ratings strictly above this value are labelled 1
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f32,

    /// Keep only the N smallest user ids
    #[arg(long, default_value_t = DEFAULT_USER_CAP, conflicts_with = "all_users")]
    n_user: usize,

    /// Keep every user
    #[arg(long)]
    all_users: bool,

    /// Most recent ratings per user held out for testing
    #[arg(long, default_value_t = DEFAULT_N_TEST)]
    n_test: usize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Split {
    Train,
    Test,
}

impl PipelineOptions {
    fn into_config(self, data_dir: PathBuf) -> PipelineConfig {
        let config = PipelineConfig::new(data_dir)
            .with_threshold(self.threshold)
            .with_n_test(self.n_test);
        if self.all_users {
            config.without_user_cap()
        } else {
            config.with_user_cap(self.n_user)
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Prepare { options } => {
            let prepared = load(options.into_config(cli.data_dir))?;
            handle_prepare(&prepared)?;
        }
        Commands::Item {
            split,
            index,
            options,
        } => {
            let prepared = load(options.into_config(cli.data_dir))?;
            handle_item(&prepared, split, index)?;
        }
    }

    Ok(())
}

/// Run the pipeline, reporting how long it took
fn load(config: PipelineConfig) -> Result<PreparedData> {
    println!("Preparing MovieLens data from {}...", config.data_dir.display());
    let start = Instant::now();
    let prepared = get_dataset(&config).context("Failed to prepare MovieLens dataset")?;
    println!("{} Prepared dataset in {:?}", "✓".green(), start.elapsed());
    Ok(prepared)
}

/// Handle the 'prepare' command
fn handle_prepare(prepared: &PreparedData) -> Result<()> {
    println!("{}", "Dataset summary:".bold().blue());
    println!("{}Movies: {}", "• ".green(), prepared.movies.len());
    print_split("Train", &prepared.train);
    print_split("Test", &prepared.test);

    if !prepared.train.is_empty() {
        let (label, [user_id, movie_id]) = prepared.train.item_at(0)?;
        println!(
            "First training example: label {} user {} movie {}",
            label[0], user_id, movie_id
        );
    }
    Ok(())
}

/// Handle the 'item' command
fn handle_item(prepared: &PreparedData, split: Split, index: usize) -> Result<()> {
    let (name, dataset) = match split {
        Split::Train => ("train", &prepared.train),
        Split::Test => ("test", &prepared.test),
    };

    let (label, [user_id, movie_id]) = dataset
        .item_at(index)
        .with_context(|| format!("Cannot read {} example {}", name, index))?;

    println!(
        "{} [{}]: label {} user {} movie {}",
        name.bold(),
        index,
        label[0],
        user_id,
        movie_id
    );
    Ok(())
}

fn print_split(name: &str, dataset: &MovieLensDataset) {
    let [n_users, n_movies] = dataset.field_dims();
    println!(
        "{}{}: {} examples, field dims [{}, {}], {:.1}% positive",
        "• ".cyan(),
        name,
        dataset.len(),
        n_users,
        n_movies,
        dataset.positive_ratio() * 100.0
    );
}
