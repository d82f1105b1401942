use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_booking_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use transport_desk::bookings::BookingService;
use transport_desk::config::AppConfig;
use transport_desk::error::AppError;
use transport_desk::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(bookings) = args.bookings.take() {
        config.bookings.source = bookings;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let booking_service = Arc::new(BookingService::new(&config.bookings));
    // Lookups answer 503 until the sheet appears and is reloaded.
    if let Err(error) = booking_service.dataset() {
        warn!(%error, source = %booking_service.source().display(), "bookings not loaded at startup");
    }

    let app = with_booking_routes(booking_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "transport desk ready");

    axum::serve(listener, app).await?;
    Ok(())
}
