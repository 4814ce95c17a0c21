//! Route table
//!
//! Filters match the path first, then the method, then the admin guard, then
//! the body, so an unknown path is a 404 and a missing token is reported
//! before a malformed payload.

use serde_json::Value;
use std::convert::Infallible;
use warp::{Filter, Rejection, Reply};

use super::auth::ensure_admin;
use super::handlers;
use super::rejection::handle_rejection;
use super::ApiState;

const MAX_BODY_BYTES: u64 = 16 * 1024;

fn with_state(state: ApiState) -> impl Filter<Extract = (ApiState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

fn json_body() -> impl Filter<Extract = (Value,), Error = Rejection> + Clone {
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

fn search_query() -> impl Filter<Extract = (Vec<(String, String)>,), Error = Rejection> + Clone {
    warp::query::<Vec<(String, String)>>()
}

pub fn company_routes(
    state: ApiState,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let admin = ensure_admin(state.admin_token.clone());

    let create = warp::path!("companies")
        .and(warp::post())
        .and(admin.clone())
        .and(json_body())
        .and(with_state(state.clone()))
        .and_then(handlers::create_company);

    let list = warp::path!("companies")
        .and(warp::get())
        .and(search_query())
        .and(with_state(state.clone()))
        .and_then(handlers::list_companies);

    let get = warp::path!("companies" / String)
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::get_company);

    let update = warp::path!("companies" / String)
        .and(warp::patch())
        .and(admin.clone())
        .and(json_body())
        .and(with_state(state.clone()))
        .and_then(handlers::update_company);

    let delete = warp::path!("companies" / String)
        .and(warp::delete())
        .and(admin)
        .and(with_state(state))
        .and_then(handlers::delete_company);

    create.or(list).or(get).or(update).or(delete)
}

pub fn job_routes(
    state: ApiState,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let admin = ensure_admin(state.admin_token.clone());

    let create = warp::path!("jobs")
        .and(warp::post())
        .and(admin.clone())
        .and(json_body())
        .and(with_state(state.clone()))
        .and_then(handlers::create_job);

    let list = warp::path!("jobs")
        .and(warp::get())
        .and(search_query())
        .and(with_state(state.clone()))
        .and_then(handlers::list_jobs);

    let get = warp::path!("jobs" / i32)
        .and(warp::get())
        .and(with_state(state.clone()))
        .and_then(handlers::get_job);

    let update = warp::path!("jobs" / i32)
        .and(warp::patch())
        .and(admin.clone())
        .and(json_body())
        .and(with_state(state.clone()))
        .and_then(handlers::update_job);

    let delete = warp::path!("jobs" / i32)
        .and(warp::delete())
        .and(admin)
        .and(with_state(state))
        .and_then(handlers::delete_job);

    create.or(list).or(get).or(update).or(delete)
}

/// Every route, with rejections rendered as JSON error bodies.
pub fn routes(state: ApiState) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    company_routes(state.clone())
        .or(job_routes(state))
        .recover(handle_rejection)
        .with(warp::trace::request())
}
