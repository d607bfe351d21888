/// GET /health
/// Plain-text probe endpoint, byte-compatible with the service this replaces.
pub async fn health_handler() -> &'static str {
    "OK"
}
