use crate::demo::{run_demo, run_sheet_report, DemoArgs, SheetReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use imprint_core::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Imprint Assessment Platform",
    about = "Serve and exercise the Imprint assessment scoring engine from the command line",
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
    /// Score a scanned answer sheet and print the report record
    Report(SheetReportArgs),
    /// Run an end-to-end demo over the built-in catalogs
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
        Command::Report(args) => run_sheet_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
