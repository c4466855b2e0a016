use holiday_planner::config::Config;
use holiday_planner::{db, routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holiday_planner=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Starting holiday planner (database: {})", config.database_url);

    let pool = db::connect(&config.database_url).await?;
    if config.seed_demo_data && db::seed::seed_demo_data(&pool).await? {
        tracing::info!("Seeded demo catalog");
    }

    let addr = config.bind_addr();
    let app = routes::router(AppState::with_pool(pool, config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
