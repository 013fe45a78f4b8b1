use tokio::net::TcpListener;

use crate::shell::config::FixtureConfig;
use crate::shell::state::AppState;

pub struct BoundServer {
    pub listener: TcpListener,
    pub state: AppState,
}

/// Binds the listener, then records the port actually bound so absolute
/// links stay followable when the configured port is 0.
pub async fn bind(mut config: FixtureConfig) -> std::io::Result<BoundServer> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    config.port = listener.local_addr()?.port();
    Ok(BoundServer {
        listener,
        state: AppState::from_config(config),
    })
}
