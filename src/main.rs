mod categorizer;
mod cli;
mod error;
mod fmt;
mod importer;
mod models;
mod reports;
mod settings;
mod whitelist;

use clap::Parser;

use cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = cli::summary::run(cli.month.as_deref(), cli.clean);

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
