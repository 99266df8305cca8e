#[cfg(feature = "server")]
pub mod http {
    use axum::{
        body::Bytes,
        extract::{DefaultBodyLimit, State},
        http::StatusCode,
        response::{IntoResponse, Json},
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tally::{CalcRequest, CalcResponse, Engine, ErrorClass};
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;
    use tracing::{debug, info, warn};

    /// Largest request body accepted, in bytes
    const MAX_BODY_BYTES: usize = 64 * 1024;

    pub async fn start_server(engine: Engine, host: &str, port: u16) -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tally=info,tower_http=info".into()),
            )
            .init();

        let app = router(engine);

        let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
        info!("Tally server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    pub fn router(engine: Engine) -> Router {
        Router::new()
            .route("/health", get(health_check))
            .route(
                "/api/v1/calculate",
                post(calculate).fallback(method_not_allowed),
            )
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(engine)
    }

    async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({
            "status": "ok",
            "service": "tally",
            "version": env!("CARGO_PKG_VERSION")
        }))
    }

    async fn method_not_allowed() -> impl IntoResponse {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    /// Any body that does not decode to a `CalcRequest` is a 400, whatever
    /// its content type.
    async fn calculate(
        State(engine): State<Engine>,
        body: Bytes,
    ) -> Result<impl IntoResponse, (StatusCode, Json<CalcResponse>)> {
        let request = CalcRequest::from_slice(&body).map_err(|e| {
            debug!("Rejected request body: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(CalcResponse::failure("Invalid JSON")),
            )
        })?;

        let outcome = engine.evaluate(&request.expression);
        let response = CalcResponse::from_outcome(&outcome);

        match &outcome {
            Ok(value) => {
                info!("Evaluated '{}' = {}", request.expression, value);
                Ok((StatusCode::OK, Json(response)))
            }
            Err(e) => {
                let status = match e.class() {
                    ErrorClass::Client => StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
                };
                warn!("Evaluation of '{}' failed: {}", request.expression, e);
                Err((status, Json(response)))
            }
        }
    }

}

#[cfg(not(feature = "server"))]
pub mod http {
    pub async fn start_server(
        _engine: tally::Engine,
        _host: &str,
        _port: u16,
    ) -> anyhow::Result<()> {
        anyhow::bail!("Server feature not enabled. Recompile with --features server")
    }
}
