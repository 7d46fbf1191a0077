use clap::{Parser, Subcommand};
use cloudbill_core::{CLOUD_BILLING_API, resolve_project_id};
use cloudbill_gcp::{GcpConfig, ServiceUsageClient};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "cloudbill")]
#[command(about = "Prepare a Google Cloud project for billing-aware operation", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enable the Cloud Billing API and check for a master billing account
    Init {
        /// Project identifier (looked up through gcloud when omitted)
        #[arg(short, long, env = "GOOGLE_CLOUD_PROJECT")]
        project: Option<String>,
    },
    /// Enable a service on the project
    Enable {
        /// Service name, e.g. compute.googleapis.com
        service: String,
        /// Project identifier (looked up through gcloud when omitted)
        #[arg(short, long, env = "GOOGLE_CLOUD_PROJECT")]
        project: Option<String>,
    },
    /// Check that an open master billing account is visible
    CheckBilling,
    /// Print the resolved project identifier
    Project,
    /// Show version information
    Version,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Init { project } => {
            println!("{}", "Preparing project for billing...".green());
            let config = GcpConfig::load()?;
            cloudbill_gcp::initialize_billing(&config, project.as_deref()).await?;
            println!("  ✓ {} enabled", CLOUD_BILLING_API.cyan());
            println!("  ✓ master billing account found");
            tracing::debug!("Billing session ready at {}", config.billing_endpoint);
        }
        Commands::Enable { service, project } => {
            println!("Enabling {}...", service.cyan());
            let config = GcpConfig::load()?;
            cloudbill_gcp::enable_service(&config, &service, project.as_deref()).await?;
            println!("  ✓ {} enabled", service.cyan());
        }
        Commands::CheckBilling => {
            let config = GcpConfig::load()?;
            cloudbill_gcp::validate_billing_account(&config, None).await?;
            println!("  ✓ master billing account found");
        }
        Commands::Project => {
            let config = GcpConfig::load()?;
            let client = ServiceUsageClient::new(&config);
            let project_id = resolve_project_id(&client).await?;
            println!("{}", project_id);
        }
        Commands::Version => {
            println!("cloudbill {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        eprintln!("{} {}", "✗".red(), e);
        std::process::exit(1);
    }
}
