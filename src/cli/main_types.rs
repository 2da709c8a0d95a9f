use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "falcon-cli")]
#[command(about = "Command line interface for the CrowdStrike Falcon API")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default is $HOME/.falcon-cli/config.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    /// Override the API base URL derived from the cloud region
    #[arg(long, global = true, env = "FALCON_BASE_URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Per-invocation credential overrides
#[derive(Args, Debug, Clone, Default)]
pub struct CredentialArgs {
    /// Falcon API client ID
    #[arg(long, global = true, env = "FALCON_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Falcon API client secret
    #[arg(long, global = true, env = "FALCON_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Falcon cloud region (us-1, us-2, eu-1, us-gov-1, us-gov-2)
    #[arg(long, global = true, env = "FALCON_CLOUD_REGION")]
    pub cloud_region: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize Falcon CLI configuration
    Init,
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Manage saved filters
    Filter {
        #[command(subcommand)]
        command: FilterCommands,
    },
    /// List hosts in your Falcon environment
    Hosts {
        /// Filter hosts (e.g., platform_name:'Windows')
        #[arg(long)]
        filter: Option<String>,
        /// Use a saved filter by name
        #[arg(long)]
        filter_name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
}

#[derive(Subcommand, Debug)]
pub enum FilterCommands {
    /// Save a filter for later use
    Save {
        /// Name of the filter
        #[arg(long)]
        name: String,
        /// Type of the filter (e.g., hosts, detections)
        #[arg(long = "type")]
        filter_type: String,
        /// Description of the filter
        #[arg(long, default_value = "")]
        description: String,
        /// Filter expression to save
        #[arg(long)]
        filter: String,
    },
    /// List saved filters
    List {
        /// Filter type to list
        #[arg(long = "type")]
        filter_type: Option<String>,
    },
    /// Delete a saved filter
    Delete {
        /// Name of the filter to delete
        #[arg(long)]
        name: String,
        /// Type of the filter to delete
        #[arg(long = "type")]
        filter_type: String,
    },
}
