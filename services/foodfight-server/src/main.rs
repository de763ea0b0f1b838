//! FoodFight Server - meal battles over REST
//!
//! # Quick Start
//!
//! ```bash
//! # Start the server on the default port
//! cargo run -p foodfight-server
//!
//! # Reproducible battle outcomes
//! cargo run -p foodfight-server -- --seed 42
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use foodfight_arena::ScorePolicy;
use foodfight_db::{Database, DatabaseConfig};
use foodfight_server::routes;
use foodfight_server::state::AppState;

#[derive(Parser)]
#[command(name = "foodfight")]
#[command(about = "FoodFight - meal battle arena service")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "FOODFIGHT_PORT")]
    port: u16,

    /// SQLite database URL
    #[arg(long, default_value = "sqlite://foodfight.db", env = "DATABASE_URL")]
    database_url: String,

    /// Seed for the battle RNG; fixed seeds make outcomes reproducible
    #[arg(long)]
    seed: Option<u64>,

    /// Hide retired meals from the leaderboard
    #[arg(long)]
    hide_retired: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("Starting FoodFight server");
    info!("  Port: {}", cli.port);
    info!("  Database: {}", cli.database_url);
    if let Some(seed) = cli.seed {
        info!("  RNG seed: {}", seed);
    }

    let db = Database::connect(&DatabaseConfig::with_url(&cli.database_url)).await?;
    db.migrate().await?;

    let state = Arc::new(AppState::new(
        db,
        ScorePolicy::default(),
        cli.seed,
        !cli.hide_retired,
    ));
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
