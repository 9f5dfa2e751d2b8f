use anyhow::Context;
use clap::Parser;
use showroom::utils::{logger, validation::Validate};
use showroom::{CliConfig, FleetFile, JsonReport, ReportFormat, TextReport};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting showroom CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let file = FleetFile::load(&config.fleet)
        .with_context(|| format!("Failed to load fleet catalog from {}", config.fleet))?;
    file.validate()
        .context("Fleet catalog failed validation")?;

    if let Some(name) = &file.name {
        tracing::info!("Loaded fleet catalog: {}", name);
    }

    let fleet = file.build().context("Fleet catalog contains invalid vehicles")?;
    tracing::info!("Built fleet with {} vehicles", fleet.len());

    match config.format {
        ReportFormat::Text => {
            let mut report = TextReport::new();
            fleet.report_to(&mut report)?;
            print!("{}", report.render());
        }
        ReportFormat::Json => {
            let mut report = JsonReport::new();
            fleet.report_to(&mut report)?;
            println!("{}", report.render()?);
        }
    }

    Ok(())
}
