/// Wish Server - birthday wish form, display and admin pages
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wish_core::{age::age_today, RecordStore};
use wish_server::{config::ServerConfig, create_router, services, state::AppState};
use wish_storage::SqliteRecordStore;

#[derive(Parser)]
#[command(name = "wish-server")]
#[command(about = "Birthday wish maker web server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "WISH_CONFIG")]
        config: Option<PathBuf>,
    },
    /// List all stored records, newest first
    ListRecords {
        /// Configuration file path
        #[arg(short, long, env = "WISH_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wish_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::ListRecords { config } => {
            list_records(config).await?;
        }
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteRecordStore> {
    let pool = wish_storage::create_pool(&config.storage.database_url).await?;
    wish_storage::run_migrations(&pool).await?;
    Ok(SqliteRecordStore::new(pool))
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Wish Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let records = Arc::new(open_store(&config).await?);
    tracing::info!("Database connected");

    // Initialize blob storage
    let blobs = services::blob_store_from_config(&config.blob).await?;
    tracing::info!("Blob storage initialized");

    // Build application state
    let app_state = AppState::new(records, blobs, config.admin.password.clone());

    // Build router
    let app = create_router(app_state, &config);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_records(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path.as_deref())?;
    config.validate_database()?;

    let store = open_store(&config).await?;
    let records = store.list_all().await?;

    println!("Records ({}):", records.len());
    for record in records {
        println!(
            "  {} - {} (age {}, {} image(s), created {})",
            record.id,
            record.full_name(),
            age_today(record.date_of_birth),
            record.images.len(),
            record.created_at.to_rfc3339()
        );
    }

    Ok(())
}
