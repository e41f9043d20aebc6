use std::path::Path;
use std::sync::Arc;

use hotel_service::config::Config;
use hotel_service::domain::hotel::ports::HotelServicePort;
use hotel_service::domain::hotel::service::HotelService;
use hotel_service::inbound::http::router::create_router;
use hotel_service::outbound::repositories::PostgresHotelRepository;
use hotel_service::outbound::seed::load_catalogue;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_service=debug,auth=debug,db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "hotel-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        nearby_city = %config.nearby.city,
        seed_file = ?config.seed.hotels_file,
        "Configuration loaded"
    );

    let pg_pool = db::create_pool(&config.database).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(config.jwt.authenticator());
    let hotel_repository = Arc::new(PostgresHotelRepository::new(pg_pool));
    let hotel_service = Arc::new(HotelService::new(
        hotel_repository,
        config.nearby.city.clone(),
    ));

    if let Some(hotels_file) = &config.seed.hotels_file {
        let catalogue = load_catalogue(Path::new(hotels_file)).await?;
        let inserted = hotel_service.seed_catalogue(catalogue).await?;
        tracing::info!(file = %hotels_file, inserted, "Hotel seeding completed");
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(hotel_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
