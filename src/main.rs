use campusorg::{config::Config, db, seed, server};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "campusorg")]
#[command(about = "Student organization records with chart-data API", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the campusorg server
    Server {
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Run database migrations
    Migrate,
    /// Insert a demo dataset into an empty database
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campusorg=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Some(Commands::Server { port }) => {
            let pool = db::init(&config)?;
            server::run(pool, port).await?;
        }
        Some(Commands::Migrate) => {
            let _pool = db::init(&config)?;
            tracing::info!("Database migrated successfully");
        }
        Some(Commands::Seed) => {
            let pool = db::init(&config)?;
            seed::run(&pool)?;
        }
        None => {
            // Default to server
            let pool = db::init(&config)?;
            server::run(pool, 3000).await?;
        }
    }

    Ok(())
}
