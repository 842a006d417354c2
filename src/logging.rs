use tracing::{Level, info, subscriber};
use tracing_subscriber::FmtSubscriber;

use crate::errors::AppError;

pub fn init_tracing(level: Level) -> Result<(), AppError> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    subscriber::set_global_default(subscriber)?;
    info!("Initialized tracing with level: {}", level);

    Ok(())
}
