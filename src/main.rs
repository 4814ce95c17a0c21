use std::net::SocketAddr;

use jobly::api::{self, ApiState};
use jobly::logger::setup_logger;
use jobly::{AppConfig, Jobly, JoblyError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    setup_logger(&config.logging.level);

    let jobly = Jobly::new(config.database.clone()).await?;
    jobly.migrate(false).await?;

    let state = ApiState::new(&jobly, &config.server.admin_token)?;

    let bind_address = config.server.bind_address();
    let addr: SocketAddr = bind_address
        .parse()
        .map_err(|_| JoblyError::InvalidAddress(bind_address.clone()))?;

    tracing::info!("Jobly listening on http://{}", addr);
    warp::serve(api::routes(state)).run(addr).await;

    Ok(())
}
