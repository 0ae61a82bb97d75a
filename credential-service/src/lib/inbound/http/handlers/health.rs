/// Plain-text liveness check for the service root.
pub async fn health() -> &'static str {
    "Credential service is running"
}
