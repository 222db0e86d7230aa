#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Delegate to the server framework entry point.
    rsvp_gateway::frameworks::server::run_with_config().await
}
