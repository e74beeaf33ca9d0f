use clap::Parser;
use redset::config::ServerConfig;
use redset::gateway::SetGateway;
use redset::server::Server;
use setdb::SetDB;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let cfg = ServerConfig::parse();
    let gw = SetGateway::new(SetDB::new());
    let server = Server::new(cfg.bind, gw);
    server.start().await
}
