//! CLI frontend for the Fateweaver character builder and story engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "fw",
    about = "Fateweaver: build a character, then play a branching story with it",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log builder and story decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate content files and report problems
    Check {
        /// Character-creation data (categories and options)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Appearance tables
        #[arg(short, long)]
        appearance: Option<PathBuf>,

        /// Scenario bundle
        #[arg(short, long)]
        story: Option<PathBuf>,
    },

    /// List the categories and options of the creation data
    Options {
        /// Character-creation data (categories and options)
        #[arg(short, long)]
        data: PathBuf,

        /// Only show this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Build a character from a picks file
    Build {
        /// Character-creation data (categories and options)
        #[arg(short, long)]
        data: PathBuf,

        /// Appearance tables
        #[arg(short, long)]
        appearance: Option<PathBuf>,

        /// Picks file: name, selections per category, appearance
        #[arg(short, long)]
        picks: PathBuf,

        /// Write the finished character as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Play a scenario bundle with a finished character, reading choices from stdin
    Play {
        /// Scenario bundle
        #[arg(short, long)]
        story: PathBuf,

        /// Character JSON written by `fw build`
        #[arg(short, long)]
        character: PathBuf,

        /// RNG seed for chance-gated choices
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Roll chance gates again every time the choices are listed
        #[arg(long)]
        reroll: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("fw_builder=debug,fw_story=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            data,
            appearance,
            story,
        } => commands::check::run(data.as_deref(), appearance.as_deref(), story.as_deref()),
        Commands::Options { data, category } => {
            commands::options::run(&data, category.as_deref())
        }
        Commands::Build {
            data,
            appearance,
            picks,
            output,
        } => commands::build::run(&data, appearance.as_deref(), &picks, output.as_deref()),
        Commands::Play {
            story,
            character,
            seed,
            reroll,
        } => commands::play::run(&story, &character, seed, reroll),
    };

    if let Err(e) = result {
        eprintln!("{e:?}");
        process::exit(1);
    }
}
