use std::convert::Infallible;

use warp::{Filter, Reply};

use crate::{
    http_api::{contacts, problem},
    store::Store,
};

pub fn create(store: Store) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    contacts::list(store.clone())
        .or(contacts::create(store.clone()))
        .or(contacts::get_single(store.clone()))
        .or(contacts::update(store.clone()))
        .or(contacts::delete(store))
        .recover(problem::unpack_problem)
        .with(warp::trace::request())
}
