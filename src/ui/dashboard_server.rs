use std::convert::Infallible;
use std::net::SocketAddr;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::{DEFAULT_LIST_LIMIT, SERVER_SHUTDOWN_GRACE_PERIOD_MS, sleep_duration_millis};
use crate::errors::{DashError, DashResult};
use crate::services::dashboard_service::DashboardService;

const PORT_SEARCH_SPAN: u16 = 120;

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_list_limit")]
    pub limit: usize,
    #[serde(default)]
    pub category: Option<String>,
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

/// Local web dashboard: `GET /`, `GET /api/summary`, `GET /api/records`.
pub struct DashboardServer {
    service: DashboardService,
    label_width: usize,
    port: Option<u16>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DashboardServer {
    pub fn new(service: DashboardService, label_width: usize) -> Self {
        Self {
            service,
            label_width,
            port: None,
            shutdown_tx: None,
        }
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub async fn start(&mut self, preferred_port: u16) -> DashResult<u16> {
        let port = Self::find_available_port(preferred_port).await?;
        self.port = Some(port);

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let routes = Self::routes(self.service.clone(), self.label_width).with(Self::cors(port));

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (_, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| DashError::system_error("binding dashboard server", &e.to_string()))?;

        tokio::spawn(server);

        log::info!("🌐 Dashboard server started on port {}", port);
        Ok(port)
    }

    pub async fn shutdown(&mut self) -> DashResult<()> {
        log::info!("🛑 Shutting down dashboard server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                DashError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Dashboard server shutdown complete");

        Ok(())
    }

    pub fn routes(
        service: DashboardService,
        label_width: usize,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let service_filter = warp::any().map(move || service.clone());

        let index = warp::path::end()
            .and(warp::get())
            .map(move || warp::reply::html(render_index(label_width)));

        let summary = warp::path!("api" / "summary")
            .and(warp::get())
            .and(service_filter.clone())
            .and_then(summary_handler);

        let records = warp::path!("api" / "records")
            .and(warp::get())
            .and(warp::query::<RecordsQuery>())
            .and(service_filter)
            .and_then(records_handler);

        index.or(summary).or(records)
    }

    /// Only pages served from this dashboard's own port may call its API.
    pub fn cors(port: u16) -> warp::cors::Builder {
        let loopback = format!("http://127.0.0.1:{}", port);
        let localhost = format!("http://localhost:{}", port);
        warp::cors()
            .allow_origin(loopback.as_str())
            .allow_origin(localhost.as_str())
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET"])
    }

    async fn find_available_port(preferred: u16) -> DashResult<u16> {
        let end = preferred.saturating_add(PORT_SEARCH_SPAN);
        for port in preferred..end {
            if let Ok(listener) = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await {
                drop(listener);
                return Ok(port);
            }
        }
        Err(DashError::system_error(
            "starting dashboard server",
            &format!("no free port between {} and {}", preferred, end),
        ))
    }
}

fn render_index(label_width: usize) -> String {
    include_str!("static/dashboard.html").replace("{{LABEL_WIDTH}}", &label_width.to_string())
}

fn error_reply(error: &DashError) -> warp::reply::WithStatus<warp::reply::Json> {
    let status = match error {
        DashError::AuthenticationError { .. } => StatusCode::UNAUTHORIZED,
        DashError::NotFoundError { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    };
    warp::reply::with_status(
        warp::reply::json(&json!({ "error": error.user_message() })),
        status,
    )
}

async fn summary_handler(service: DashboardService) -> Result<impl warp::Reply, Infallible> {
    match service.load_summary().await {
        Ok(summary) => Ok(warp::reply::with_status(warp::reply::json(&summary), StatusCode::OK)),
        Err(e) => {
            log::error!("❌ Failed to load summary: {}", e.technical_details());
            Ok(error_reply(&e))
        }
    }
}

async fn records_handler(query: RecordsQuery, service: DashboardService) -> Result<impl warp::Reply, Infallible> {
    match service.load_records(query.skip, query.limit, query.category).await {
        Ok(records) => Ok(warp::reply::with_status(warp::reply::json(&records), StatusCode::OK)),
        Err(e) => {
            log::error!("❌ Failed to load records: {}", e.technical_details());
            Ok(error_reply(&e))
        }
    }
}
