use clap::Parser;
use dotenv::dotenv;

use crate::{
    errors::AppError,
    http_api,
    logging,
    prelude::{command::Cli, store::Store},
};

pub async fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    logging::init_tracing(cli.log_level)?;

    let store = Store::in_memory();
    tracing::info!("Contact store medium: {}", store.medium()?);

    let routes = http_api::routes(store);
    let (addr, server) = warp::serve(routes).try_bind_ephemeral(cli.listen_addr())?;

    tracing::info!("Contact directory listening on http://{}", addr);
    server.await;

    Ok(())
}
