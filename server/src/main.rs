use server::config::ServerConfig;
use server::server::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server = HttpServer::bind(ServerConfig::default()).await?;
    server.run().await?;

    Ok(())
}
