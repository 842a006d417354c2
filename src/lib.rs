pub mod cli;
pub mod domain;
pub mod errors;
pub mod http_api;
pub mod logging;
pub mod prelude;
pub mod store;
pub mod validation;
