use crate::demo::{run_demo, run_housing_filter, run_housing_options, DemoArgs, HousingFilterArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use enable_listings::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EnAble Listing Catalog",
    about = "Serve and explore accessible-housing and care-service listings",
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
    /// Work with housing listings from the command line
    Housing {
        #[command(subcommand)]
        command: HousingCommand,
    },
    /// Walk through the catalog and filter engine with sample data
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum HousingCommand {
    /// Load a listing export and print the cards matching the given filters
    Filter(HousingFilterArgs),
    /// Print the selectable options for every filter field
    Options,
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
        Command::Housing {
            command: HousingCommand::Filter(args),
        } => run_housing_filter(args),
        Command::Housing {
            command: HousingCommand::Options,
        } => {
            run_housing_options();
            Ok(())
        }
        Command::Demo(args) => run_demo(args),
    }
}
