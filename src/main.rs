mod config;
mod dataset;
mod llm;
mod session;
mod shell;
mod terminal;

use crate::config::Config;
use crate::llm::OpenRouterClient;
use crate::session::Session;
use crate::shell::Shell;
use anyhow::Result;
use std::env;
use std::path::PathBuf;

const USAGE: &str = "Usage: ficha-tecnica [DATASET]

DATASET  spreadsheet (.xlsx, .xls, .ods) or .csv with the materials table.
         Defaults to $FICHA_DATASET, then materiales_energyplus.xlsx.

Environment: OPENROUTER_API_KEY, MENTOR_BASE_URL, MENTOR_MODEL, MENTOR_TIMEOUT_SECS.
A .env file in the working directory is loaded first.";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = Config::from_env();
    if let Some(path) = args.first() {
        config.dataset_path = PathBuf::from(path);
    }
    if config.api_key.is_none() {
        log::warn!("OPENROUTER_API_KEY is not set; Mentor AI queries will fail");
    }

    // A dataset that cannot be loaded ends the process here.
    let materials = dataset::load(&config.dataset_path)?;
    if materials.is_empty() {
        log::warn!("Dataset {} contains no materials", config.dataset_path.display());
    }

    let session = Session::new(OpenRouterClient::new(&config)?);
    let mut shell = Shell::new(materials, session)?;
    shell.run().await?;

    Ok(())
}
