use crate::demo::{run_appraise, run_demo, run_inventory_preview, AppraiseArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lot_iq::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Lot IQ",
    about = "Appraise used vehicles and run the acquisition desk service from the command line",
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
    /// Appraise a single vehicle from the command line
    Appraise(AppraiseArgs),
    /// Work with the comparable inventory backing the appraiser
    Inventory {
        #[command(subcommand)]
        command: InventoryCommand,
    },
    /// Run an end-to-end CLI demo covering the buy, wholesale, and reject lanes
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum InventoryCommand {
    /// Preview the comparable listings a vehicle would price against
    Preview(PreviewArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Inventory CSV export to price against instead of the seeded lot
    #[arg(long)]
    pub(crate) inventory_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct PreviewArgs {
    /// Vehicle make to match
    #[arg(long)]
    pub(crate) make: String,
    /// Vehicle model to match
    #[arg(long)]
    pub(crate) model: String,
    /// Model year to window the matches around
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Trim level to narrow the matches when possible
    #[arg(long)]
    pub(crate) trim: Option<String>,
    /// Inventory CSV export to search instead of the seeded lot
    #[arg(long)]
    pub(crate) inventory_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Appraise(args) => run_appraise(args),
        Command::Inventory {
            command: InventoryCommand::Preview(args),
        } => run_inventory_preview(args),
        Command::Demo(args) => run_demo(args),
    }
}
