//! Integration tests for the company and job stores
//!
//! Run against the database named by `DATABASE_URL`; every test returns early
//! when it is unset. Keys are random so tests can share one database.

use jobly::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Map, Value};
use std::str::FromStr;
use tokio::sync::OnceCell;
use uuid::Uuid;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

async fn setup() -> Option<Jobly> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping");
        return None;
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");
    let jobly = Jobly::from_pool(pool);

    MIGRATED
        .get_or_init(|| async {
            jobly.migrate(false).await.expect("Failed to create tables");
        })
        .await;

    Some(jobly)
}

fn unique(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &id[..12])
}

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

async fn create_company(jobly: &Jobly, employees: Option<i32>) -> Company {
    let handle = unique("c");
    jobly
        .companies()
        .create(NewCompany {
            name: format!("Name {handle}"),
            description: format!("Desc {handle}"),
            handle,
            num_employees: employees,
            logo_url: Some("http://c1.img".to_string()),
        })
        .await
        .expect("Failed to create company")
}

async fn create_job(jobly: &Jobly, title: &str, equity: Option<&str>, handle: &str) -> Job {
    jobly
        .jobs()
        .create(NewJob {
            title: title.to_string(),
            salary: Some(100),
            equity: equity.map(|e| Decimal::from_str(e).unwrap()),
            company_handle: handle.to_string(),
        })
        .await
        .expect("Failed to create job")
}

#[tokio::test]
async fn test_company_lifecycle() {
    let Some(jobly) = setup().await else { return };
    let companies = jobly.companies();

    let created = create_company(&jobly, Some(3)).await;
    let found = companies.get(&created.handle).await.unwrap();
    assert_eq!(found, created);

    let updated = companies
        .update(
            &created.handle,
            &fields(json!({ "name": "Renamed", "numEmployees": 10, "logoUrl": null })),
        )
        .await
        .unwrap();
    assert_eq!(updated.handle, created.handle);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.num_employees, Some(10));
    assert_eq!(updated.logo_url, None);
    assert_eq!(updated.description, created.description);

    companies.remove(&created.handle).await.unwrap();
    assert!(matches!(
        companies.get(&created.handle).await,
        Err(StoreError::NotFound { entity: "company", .. })
    ));
    assert!(matches!(
        companies.remove(&created.handle).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_company_duplicate_handle() {
    let Some(jobly) = setup().await else { return };

    let created = create_company(&jobly, None).await;
    let result = jobly
        .companies()
        .create(NewCompany {
            handle: created.handle.clone(),
            name: unique("other"),
            description: "dup".to_string(),
            num_employees: None,
            logo_url: None,
        })
        .await;

    match result {
        Err(StoreError::Duplicate { entity, key }) => {
            assert_eq!(entity, "company");
            assert_eq!(key, created.handle);
        }
        other => panic!("expected duplicate error, got {other:?}"),
    }

    jobly.companies().remove(&created.handle).await.unwrap();
}

#[tokio::test]
async fn test_company_filters() {
    let Some(jobly) = setup().await else { return };
    let companies = jobly.companies();

    let small = create_company(&jobly, Some(1)).await;
    let large = create_company(&jobly, Some(300)).await;

    // name_like matches case-insensitively on a fragment of the unique handle
    let filter = CompanyFilter {
        name_like: Some(small.handle[2..].to_uppercase()),
        ..Default::default()
    };
    let found = companies.find_all(&filter).await.unwrap();
    assert_eq!(found, vec![small.clone()]);

    let filter = CompanyFilter {
        min_employees: Some(299),
        max_employees: Some(300),
        ..Default::default()
    };
    let first = companies.find_all(&filter).await.unwrap();
    let second = companies.find_all(&filter).await.unwrap();
    assert_eq!(first, second);
    assert!(first.contains(&large));
    assert!(!first.contains(&small));

    let all = companies.find_all(&CompanyFilter::default()).await.unwrap();
    assert!(all.contains(&small) && all.contains(&large));

    companies.remove(&small.handle).await.unwrap();
    companies.remove(&large.handle).await.unwrap();
}

#[tokio::test]
async fn test_job_equity_keeps_scale() {
    let Some(jobly) = setup().await else { return };
    let company = create_company(&jobly, None).await;
    let jobs = jobly.jobs();

    let job = create_job(&jobly, &unique("j"), Some("0.010"), &company.handle).await;
    assert_eq!(jobs.get(&job.id).await.unwrap(), job);
    let body = serde_json::to_value(&job).unwrap();
    assert_eq!(body["equity"], json!("0.010"));
    assert_eq!(body["companyHandle"], json!(company.handle));

    let updated = jobs
        .update(&job.id, &fields(json!({ "equity": "0.050", "salary": null })))
        .await
        .unwrap();
    assert_eq!(updated.equity, Some(Decimal::from_str("0.050").unwrap()));
    assert_eq!(updated.salary, None);
    assert_eq!(updated.title, job.title);

    jobly.companies().remove(&company.handle).await.unwrap();
}

#[tokio::test]
async fn test_job_filters() {
    let Some(jobly) = setup().await else { return };
    let company = create_company(&jobly, None).await;
    let jobs = jobly.jobs();

    let title = unique("filter");
    let with_equity = create_job(&jobly, &format!("{title} a"), Some("0.5"), &company.handle).await;
    let zero_equity = create_job(&jobly, &format!("{title} b"), Some("0"), &company.handle).await;
    let no_equity = create_job(&jobly, &format!("{title} c"), None, &company.handle).await;

    let required = JobFilter {
        title: Some(title.clone()),
        has_equity: EquityFilter::RequireEquity,
        ..Default::default()
    };
    assert_eq!(jobs.find_all(&required).await.unwrap(), vec![with_equity.clone()]);

    let not_required = JobFilter {
        title: Some(title.clone()),
        has_equity: EquityFilter::NotRequired,
        ..Default::default()
    };
    assert_eq!(
        jobs.find_all(&not_required).await.unwrap(),
        vec![with_equity, zero_equity, no_equity]
    );

    let too_rich = JobFilter {
        title: Some(title),
        min_salary: Some(101),
        ..Default::default()
    };
    assert!(jobs.find_all(&too_rich).await.unwrap().is_empty());

    jobly.companies().remove(&company.handle).await.unwrap();
}

#[tokio::test]
async fn test_job_remove() {
    let Some(jobly) = setup().await else { return };
    let company = create_company(&jobly, None).await;
    let jobs = jobly.jobs();

    let job = create_job(&jobly, &unique("j"), None, &company.handle).await;
    jobs.remove(&job.id).await.unwrap();

    assert!(matches!(
        jobs.get(&job.id).await,
        Err(StoreError::NotFound { entity: "job", .. })
    ));
    assert!(matches!(
        jobs.remove(&job.id).await,
        Err(StoreError::NotFound { .. })
    ));
    // the company is untouched
    assert_eq!(jobly.companies().get(&company.handle).await.unwrap(), company);

    jobly.companies().remove(&company.handle).await.unwrap();
}

#[tokio::test]
async fn test_missing_rows_are_not_found() {
    let Some(jobly) = setup().await else { return };

    let missing = unique("nope");
    assert!(matches!(
        jobly
            .companies()
            .update(&missing, &fields(json!({ "name": "x" })))
            .await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        jobly.jobs().get(&0).await,
        Err(StoreError::NotFound { entity: "job", .. })
    ));
    assert!(matches!(
        jobly.jobs().remove(&0).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_removing_company_removes_its_jobs() {
    let Some(jobly) = setup().await else { return };
    let company = create_company(&jobly, None).await;
    let job = create_job(&jobly, &unique("j"), None, &company.handle).await;

    jobly.companies().remove(&company.handle).await.unwrap();

    assert!(matches!(
        jobly.jobs().get(&job.id).await,
        Err(StoreError::NotFound { .. })
    ));
}
