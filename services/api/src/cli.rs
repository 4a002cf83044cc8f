use crate::demo::{
    run_compare, run_demo, run_explore, run_recommend, run_score, CompareArgs, DemoArgs,
    ExploreArgs, RecommendArgs, ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use crypto_selector::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "crypto-selector",
    about = "Recommend cryptographic algorithms from security, performance, and compliance needs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank the catalog against a requirements profile
    Recommend(RecommendArgs),
    /// Show the score breakdown and reasoning for one algorithm
    Score(ScoreArgs),
    /// Browse the algorithm catalog
    Explore(ExploreArgs),
    /// Compare up to four algorithms side by side
    Compare(CompareArgs),
    /// Walk through sample requirement profiles end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load catalog documents from this directory instead of the embedded catalog
    #[arg(long)]
    pub(crate) catalog_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::Score(args) => run_score(args),
        Command::Explore(args) => run_explore(args),
        Command::Compare(args) => run_compare(args),
        Command::Demo(args) => run_demo(args),
    }
}
