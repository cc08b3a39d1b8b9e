//! Prometheus request metrics.
//!
//! `http_requests_total` counts finished requests by method, matched route
//! and status; `http_request_duration_seconds` records their latency.

use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Label used when no route matched (404s).
const UNMATCHED_HANDLER: &str = "none";

#[derive(Clone)]
pub struct HttpMetrics {
    registry: Registry,
    requests: IntCounterVec,
    latency: HistogramVec,
}

impl HttpMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of requests by method, handler and status."),
            &["method", "handler", "status"],
        )?;
        let latency = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Latency of HTTP requests by method and handler.",
            ),
            &["method", "handler"],
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(latency.clone()))?;

        Ok(Self {
            registry,
            requests,
            latency,
        })
    }

    pub fn observe(&self, method: &str, handler: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.requests
            .with_label_values(&[method, handler, status.as_str()])
            .inc();
        self.latency
            .with_label_values(&[method, handler])
            .observe(elapsed.as_secs_f64());
    }

    /// Text exposition of every registered metric, with its content type.
    pub fn render(&self) -> Result<(String, String), prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        let body = String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))?;
        Ok((body, encoder.format_type().to_string()))
    }
}

pub async fn track_metrics(
    State(metrics): State<HttpMetrics>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let handler = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_HANDLER.to_owned());

    let response = next.run(request).await;

    metrics.observe(&method, &handler, response.status().as_u16(), start.elapsed());
    response
}
