use crate::demo::{run_demo, run_score, run_validate, DemoArgs, ScoreArgs, ValidateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mission_match::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Mission Match",
    about = "Score nurses against establishment missions from the command line or over HTTP",
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
    /// Score one candidate against one mission from a JSON request file
    Score(ScoreArgs),
    /// Check an establishment scoring configuration from a JSON file
    Validate(ValidateArgs),
    /// Rank a synthetic candidate pool to show the three scoring tiers
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Validate(args) => run_validate(args),
        Command::Demo(args) => run_demo(args),
    }
}
