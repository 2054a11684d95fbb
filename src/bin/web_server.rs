use shortest_route::web::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::from_env();

    // An explicit port argument wins over the environment
    if let Some(arg) = env::args().nth(1) {
        match arg.parse() {
            Ok(port) => config.port = port,
            Err(_) => log::warn!("Ignoring port argument {:?}", arg),
        }
    }

    println!("🔧 Starting route server...");
    println!("⚙️  Configuration:");
    println!("   📡 Address: {}", config.address());
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!("   👥 Max sessions: {}", config.max_sessions);
    println!("   📍 Max places per graph: {}", config.max_nodes);
    println!();

    start_server(config).await?;

    Ok(())
}
