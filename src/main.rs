use clap::Parser;
use falcon_cli::cli::dispatcher::Dispatcher;
use falcon_cli::cli::main_types::Cli;
use falcon_cli::storage::config::Config;
use falcon_cli::utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load Config
    let config_path = cli.config.clone().or_else(|| Config::config_file_path().ok());
    if let Some(path) = config_path.as_ref().filter(|p| p.exists()) {
        log::info!("Using config file: {}", path.display());
    }

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    let dispatcher = Dispatcher::new(
        config,
        config_path,
        cli.verbose,
        cli.credentials,
        cli.base_url,
    );

    // Execute the command
    if let Err(e) = dispatcher.dispatch(cli.command).await {
        log::debug!("Command failed with {} severity", e.severity().label());
        eprintln!("Error: {}", e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }

    Ok(())
}
