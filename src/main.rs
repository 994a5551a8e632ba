use clap::Parser;
use dns_pricing_engine::cli::{execute_rank, Cli, Commands};
use dns_pricing_engine::config::Config;
use dns_pricing_engine::PricingEngine;
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = if Path::new(&cli.config).exists() {
        Config::load(&cli.config)?
    } else {
        eprintln!("Warning: {} not found, using default configuration", cli.config);
        Config::default()
    };

    if let Err(errors) = config.validate() {
        eprintln!("Configuration errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        anyhow::bail!("invalid configuration in {}", cli.config);
    }

    // Initialize telemetry
    dns_pricing_engine::telemetry::init_telemetry(&config.telemetry)?;

    let engine = PricingEngine::from_config(&config).await?;
    let format = cli.format;

    match cli.command {
        Commands::Convert(args) => args.execute(&engine, format)?,
        Commands::Matrix(args) => args.execute(&engine, format)?,
        Commands::Quote(args) => args.execute(&engine, format)?,
        Commands::Score(args) => args.execute(&engine, format)?,
        Commands::Rank => execute_rank(&engine, format)?,
        Commands::Optimize(args) => args.execute(&engine, format)?,
        Commands::Catalog(args) => args.execute(&engine, format)?,
        Commands::Config => {
            println!("Current configuration:");
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
