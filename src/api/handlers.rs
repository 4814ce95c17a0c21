//! Route handlers
//!
//! Each handler validates its input, makes one store call, and wraps the
//! result in the envelope key the client expects.

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use store_object::{CompanyFilter, JobFilter, StoreObject};
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use super::query::{coerce_query, COMPANY_INT_KEYS, JOB_BOOL_KEYS, JOB_INT_KEYS};
use super::rejection::{reject, ApiError};
use super::schemas::SchemaKind;
use super::ApiState;

fn validated<T: DeserializeOwned>(
    state: &ApiState,
    kind: SchemaKind,
    body: Value,
) -> Result<T, Rejection> {
    state.schemas.validate(kind, &body).map_err(reject)?;
    serde_json::from_value(body).map_err(|e| reject(ApiError::BadRequest(e.to_string())))
}

fn update_fields(
    state: &ApiState,
    kind: SchemaKind,
    body: Value,
) -> Result<Map<String, Value>, Rejection> {
    state.schemas.validate(kind, &body).map_err(reject)?;
    match body {
        Value::Object(fields) => Ok(fields),
        _ => Err(reject(ApiError::BadRequest("Expected a JSON object".into()))),
    }
}

fn created(body: Value) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&body), StatusCode::CREATED)
}

// companies

pub async fn create_company(body: Value, state: ApiState) -> Result<impl Reply, Rejection> {
    let new_company = validated(&state, SchemaKind::CompanyNew, body)?;
    let company = state.companies.create(new_company).await.map_err(reject)?;
    Ok(created(json!({ "company": company })))
}

pub async fn list_companies(
    query: Vec<(String, String)>,
    state: ApiState,
) -> Result<impl Reply, Rejection> {
    let search = Value::Object(coerce_query(query, COMPANY_INT_KEYS, &[]));
    let filter: CompanyFilter = validated(&state, SchemaKind::CompanySearch, search)?;
    let companies = state.companies.find_all(&filter).await.map_err(reject)?;
    Ok(warp::reply::json(&json!({ "companies": companies })))
}

pub async fn get_company(handle: String, state: ApiState) -> Result<impl Reply, Rejection> {
    let company = state.companies.get(&handle).await.map_err(reject)?;
    Ok(warp::reply::json(&json!({ "company": company })))
}

pub async fn update_company(
    handle: String,
    body: Value,
    state: ApiState,
) -> Result<impl Reply, Rejection> {
    let fields = update_fields(&state, SchemaKind::CompanyUpdate, body)?;
    let company = state
        .companies
        .update(&handle, &fields)
        .await
        .map_err(reject)?;
    Ok(warp::reply::json(&json!({ "company": company })))
}

pub async fn delete_company(handle: String, state: ApiState) -> Result<impl Reply, Rejection> {
    state.companies.remove(&handle).await.map_err(reject)?;
    Ok(warp::reply::json(&json!({ "deleted": handle })))
}

// jobs

pub async fn create_job(body: Value, state: ApiState) -> Result<impl Reply, Rejection> {
    let new_job = validated(&state, SchemaKind::JobNew, body)?;
    let job = state.jobs.create(new_job).await.map_err(reject)?;
    Ok(created(json!({ "job": job })))
}

pub async fn list_jobs(
    query: Vec<(String, String)>,
    state: ApiState,
) -> Result<impl Reply, Rejection> {
    let search = Value::Object(coerce_query(query, JOB_INT_KEYS, JOB_BOOL_KEYS));
    let filter: JobFilter = validated(&state, SchemaKind::JobSearch, search)?;
    let jobs = state.jobs.find_all(&filter).await.map_err(reject)?;
    Ok(warp::reply::json(&json!({ "jobs": jobs })))
}

pub async fn get_job(id: i32, state: ApiState) -> Result<impl Reply, Rejection> {
    let job = state.jobs.get(&id).await.map_err(reject)?;
    Ok(warp::reply::json(&json!({ "job": job })))
}

pub async fn update_job(id: i32, body: Value, state: ApiState) -> Result<impl Reply, Rejection> {
    let fields = update_fields(&state, SchemaKind::JobUpdate, body)?;
    let job = state.jobs.update(&id, &fields).await.map_err(reject)?;
    Ok(warp::reply::json(&json!({ "job": job })))
}

pub async fn delete_job(id: i32, state: ApiState) -> Result<impl Reply, Rejection> {
    state.jobs.remove(&id).await.map_err(reject)?;
    Ok(warp::reply::json(&json!({ "deleted": id.to_string() })))
}
