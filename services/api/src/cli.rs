use crate::demo::{run_demo, DemoArgs};
use crate::report::{run_score, run_statement_analysis, ScoreArgs, StatementAnalyzeArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use sme_credit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SME Credit Evaluator",
    about = "Analyze bank statements and score small-business credit profiles",
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
    /// Work with bank statement exports
    Statement {
        #[command(subcommand)]
        command: StatementCommand,
    },
    /// Score a profile stored as JSON, optionally pre-populated from a statement
    Score(ScoreArgs),
    /// Walk through sample borrowers end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum StatementCommand {
    /// Derive payment-behaviour proxies from a statement CSV
    Analyze(StatementAnalyzeArgs),
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
        Command::Statement {
            command: StatementCommand::Analyze(args),
        } => run_statement_analysis(args),
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}
