use clap::Parser;
use cosmos_evm_harness::cli::HarnessCli;
use cosmos_evm_harness::commands::run;
use cosmos_evm_harness::config::HarnessConfig;
use cosmos_evm_harness::tracing::init_subscriber;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, the variables are optional.
    let _ = dotenv::dotenv();

    let cli = HarnessCli::parse();
    let config = HarnessConfig::resolve(&cli)?;

    init_subscriber(config.log_level())?;
    info!(
        "Harness initialized with level: {}, prefix: {}",
        config.log_level(),
        config.address_prefix
    );

    let output = run(&cli.command, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
