pub mod contacts;
pub mod problem;
mod route_factory;

pub use contacts::MAX_BODY_BYTES;
pub use problem::{Problem, unpack_problem};
pub use route_factory::create as routes;
