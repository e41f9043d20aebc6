use std::sync::Arc;

use api_client::NetworkAdapter;
use api_client::ServiceUrls;
use booking_service::config::Config;
use booking_service::domain::booking::service::BookingService;
use booking_service::inbound::http::router::create_router;
use booking_service::outbound::clients::HttpHotelCatalog;
use booking_service::outbound::repositories::PostgresBookingRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "booking_service=debug,api_client=debug,auth=debug,db=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "booking-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        hotel_service_url = %config.hotel_service.url,
        "Configuration loaded"
    );

    let pg_pool = db::create_pool(&config.database).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let adapter = NetworkAdapter::new(ServiceUrls {
        hotels: config.hotel_service.url.clone(),
        ..ServiceUrls::default()
    });

    let authenticator = Arc::new(config.jwt.authenticator());
    let booking_repository = Arc::new(PostgresBookingRepository::new(pg_pool));
    let hotel_catalog = Arc::new(HttpHotelCatalog::new(adapter));
    let booking_service = Arc::new(BookingService::new(booking_repository, hotel_catalog));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(booking_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
