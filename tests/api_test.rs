//! Route tests against a live database
//!
//! Skipped when `DATABASE_URL` is unset.

use jobly::api::{routes, ApiState};
use jobly::prelude::*;
use serde_json::{json, Value};
use uuid::Uuid;
use warp::http::StatusCode;

const TOKEN: &str = "api-test-token";

async fn setup() -> Option<ApiState> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping");
        return None;
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");
    let jobly = Jobly::from_pool(pool);
    jobly.migrate(false).await.expect("Failed to create tables");

    Some(ApiState::new(&jobly, TOKEN).expect("Failed to build API state"))
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_company_and_job_routes() {
    let Some(state) = setup().await else { return };
    let api = routes(state);
    let auth = format!("Bearer {TOKEN}");
    let handle = format!("api-{}", &Uuid::new_v4().simple().to_string()[..12]);

    let res = warp::test::request()
        .method("POST")
        .path("/companies")
        .header("authorization", &auth)
        .json(&json!({
            "handle": handle,
            "name": format!("Api {handle}"),
            "description": "Desc",
            "numEmployees": 7
        }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(res.body()),
        json!({
            "company": {
                "handle": handle,
                "name": format!("Api {handle}"),
                "description": "Desc",
                "numEmployees": 7,
                "logoUrl": null
            }
        })
    );

    let res = warp::test::request()
        .method("POST")
        .path("/jobs")
        .header("authorization", &auth)
        .json(&json!({
            "title": format!("Job {handle}"),
            "salary": 1000,
            "equity": "0.010",
            "companyHandle": handle
        }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let job = body_json(res.body())["job"].clone();
    assert_eq!(job["equity"], json!("0.010"));
    let job_id = job["id"].as_i64().unwrap();

    let res = warp::test::request()
        .method("GET")
        .path(&format!("/jobs/{job_id}"))
        .reply(&api)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res.body()), json!({ "job": job }));

    let res = warp::test::request()
        .method("GET")
        .path(&format!("/jobs?title={handle}&hasEquity=true&minSalary=1000"))
        .reply(&api)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res.body()), json!({ "jobs": [job] }));

    let res = warp::test::request()
        .method("PATCH")
        .path(&format!("/jobs/{job_id}"))
        .header("authorization", &auth)
        .json(&json!({ "title": "Renamed" }))
        .reply(&api)
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res.body())["job"]["title"], json!("Renamed"));

    let res = warp::test::request()
        .method("DELETE")
        .path(&format!("/jobs/{job_id}"))
        .header("authorization", &auth)
        .reply(&api)
        .await;
    assert_eq!(body_json(res.body()), json!({ "deleted": job_id.to_string() }));

    let res = warp::test::request()
        .method("GET")
        .path(&format!("/jobs/{job_id}"))
        .reply(&api)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(res.body())["error"]["message"],
        json!(format!("No job: {job_id}"))
    );

    let res = warp::test::request()
        .method("DELETE")
        .path(&format!("/companies/{handle}"))
        .header("authorization", &auth)
        .reply(&api)
        .await;
    assert_eq!(body_json(res.body()), json!({ "deleted": handle }));

    let res = warp::test::request()
        .method("GET")
        .path(&format!("/companies/{handle}"))
        .reply(&api)
        .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(res.body())["error"]["message"],
        json!(format!("No company: {handle}"))
    );
}
