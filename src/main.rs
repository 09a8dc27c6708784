#![forbid(unsafe_code)]
//! Postscore Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use postscore::commands::{
    execute_analyze, execute_languages, execute_platforms, AnalyzeOptions, OutputFormat,
};

#[derive(Parser)]
#[command(name = "postscore")]
#[command(about = "Rule-based AIDA copywriting scorer for social media posts")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a post for a target platform
    Analyze {
        /// Post text; omit to read from --file or stdin
        text: Option<String>,

        /// Read the post text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Target platform (twitter, facebook, instagram, linkedin)
        #[arg(short, long, default_value = "twitter")]
        platform: String,

        /// Post language (en, nl); omit to auto-detect
        #[arg(short, long)]
        language: Option<String>,

        /// Scoring config file (JSON) overriding the reference policy
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Disable the linguistic rule group
        #[arg(long)]
        basic: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List supported platforms and their length limits
    Platforms,

    /// List supported languages and lexicon sizes
    Languages,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze {
            text,
            file,
            platform,
            language,
            config,
            basic,
            format,
        } => execute_analyze(AnalyzeOptions {
            text,
            file,
            platform,
            language,
            config,
            basic,
            format,
        }),
        Commands::Platforms => execute_platforms(),
        Commands::Languages => execute_languages(),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "postscore=debug" } else { "postscore=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
