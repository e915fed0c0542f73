use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use port_registry::config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use port_registry::{api, store::RegistryStore};

#[derive(Parser)]
#[command(name = "portreg")]
#[command(about = "Registry of vessels docked at a port")]
struct Cli {
    /// Used when no subcommand is given
    #[command(flatten)]
    server: ServerArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the registry HTTP server
    Serve(ServerArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct ServerArgs {
    /// Address to bind
    #[arg(long, env = "PORT_REGISTRY_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port for HTTP API
    #[arg(short, long, env = "PORT_REGISTRY_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

impl Cli {
    fn server_args(self) -> ServerArgs {
        match self.command {
            Some(Commands::Serve(args)) => args,
            None => self.server,
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "port_registry=debug,port_registry_core=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let store = RegistryStore::new();
    let app = api::create_router_with_config(store, &config)?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Port registry listening on http://{}", config.bind_addr());

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let args = cli.server_args();
    let config = ServerConfig::new(args.host, args.port).with_cors_from_env();

    tracing::info!("Starting port registry on {}", config.bind_addr());
    serve(config).await
}
