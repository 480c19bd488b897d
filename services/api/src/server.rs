use crate::cli::ServeArgs;
use crate::infra::{
    default_business_settings, load_inventory, AppState, FixtureVinDecoder, InMemoryInventoryStore,
};
use crate::routes::with_appraisal_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lot_iq::appraisal::vin::VinDecoder;
use lot_iq::appraisal::AppraisalService;
use lot_iq::config::AppConfig;
use lot_iq::error::AppError;
use lot_iq::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let inventory = load_inventory(args.inventory_csv.take())?;
    info!(listings = inventory.len(), "comparable inventory loaded");

    let store = Arc::new(InMemoryInventoryStore::with_cars(inventory));
    let settings = default_business_settings(&config.valuation);
    let appraisal_service = Arc::new(AppraisalService::new(store, settings));
    let vin_decoder: Arc<dyn VinDecoder> = Arc::new(FixtureVinDecoder::default());

    let app = with_appraisal_routes(appraisal_service, vin_decoder)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "appraisal desk ready");

    axum::serve(listener, app).await?;
    Ok(())
}
