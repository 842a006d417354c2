use futures::TryFutureExt;
use warp::{Filter, Rejection, Reply, http::StatusCode, hyper::body::Bytes};

use crate::{
    domain::ContactId,
    errors::AppError,
    http_api::problem,
    store::Store,
    validation,
};

/// Largest request body accepted by create and update.
pub const MAX_BODY_BYTES: u64 = 16 * 1024;

/// `GET /api/contacts`
pub fn list(store: Store) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "contacts")
        .and(warp::get())
        .and_then(move || {
            list_handler(store.clone())
                .map_err(problem::from_app_error)
                .map_err(warp::reject::custom)
        })
}

/// `POST /api/contacts`
pub fn create(store: Store) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "contacts")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and_then(move |body| {
            create_handler(body, store.clone())
                .map_err(problem::from_app_error)
                .map_err(warp::reject::custom)
        })
}

/// `GET /api/contacts/{id}`
pub fn get_single(
    store: Store,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "contacts" / ContactId)
        .and(warp::get())
        .and_then(move |id| {
            get_handler(id, store.clone())
                .map_err(problem::from_app_error)
                .map_err(warp::reject::custom)
        })
}

/// `PATCH /api/contacts/{id}`
pub fn update(store: Store) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "contacts" / ContactId)
        .and(warp::patch())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::bytes())
        .and_then(move |id, body| {
            update_handler(id, body, store.clone())
                .map_err(problem::from_app_error)
                .map_err(warp::reject::custom)
        })
}

/// `DELETE /api/contacts/{id}`
pub fn delete(store: Store) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path!("api" / "contacts" / ContactId)
        .and(warp::delete())
        .and_then(move |id| {
            delete_handler(id, store.clone())
                .map_err(problem::from_app_error)
                .map_err(warp::reject::custom)
        })
}

async fn list_handler(store: Store) -> Result<impl Reply, AppError> {
    let contacts = store.list()?;
    Ok(warp::reply::json(&contacts))
}

async fn create_handler(body: Bytes, store: Store) -> Result<impl Reply, AppError> {
    let fields = validation::parse_payload(&body)?;
    validation::require_names(&fields)?;

    let contact = store.create(fields)?;

    Ok(warp::reply::with_status(
        warp::reply::json(&contact),
        StatusCode::CREATED,
    ))
}

async fn get_handler(id: ContactId, store: Store) -> Result<impl Reply, AppError> {
    let contact = store.get(id)?;
    Ok(warp::reply::json(&contact))
}

async fn update_handler(id: ContactId, body: Bytes, store: Store) -> Result<impl Reply, AppError> {
    let fields = validation::parse_payload(&body)?;
    let contact = store.update(id, fields)?;
    Ok(warp::reply::json(&contact))
}

async fn delete_handler(id: ContactId, store: Store) -> Result<impl Reply, AppError> {
    store.delete(id)?;
    Ok(warp::reply::with_status(
        warp::reply(),
        StatusCode::NO_CONTENT,
    ))
}
