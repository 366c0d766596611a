use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use promptdesk::cli::Commands;
use promptdesk::connector::api::Router;
use promptdesk::connector::{http, shell};
use promptdesk::{Container, ContainerConfig, Provider};

#[derive(Parser)]
#[command(name = "promptdesk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Completion API used by the text categories
    #[arg(long, global = true, value_enum, default_value_t = Provider::Openai)]
    provider: Provider,

    /// Answer from offline mock clients instead of calling any service
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        provider: cli.provider,
        mock: cli.mock,
    });

    match cli.command {
        Commands::Serve {
            port,
            public,
            cors_origins,
        } => {
            let host = if public {
                Ipv4Addr::UNSPECIFIED
            } else {
                Ipv4Addr::LOCALHOST
            };
            info!(
                "Starting promptdesk (provider {}, model {})",
                container.provider().as_str(),
                container.model_name()
            );
            let addr = SocketAddr::from((host, port));
            http::serve(Arc::new(container), addr, cors_origins.as_deref()).await?;
        }

        Commands::Shell => shell::run(&container).await?,

        command => {
            let output = Router::new(&container).route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
