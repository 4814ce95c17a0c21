//! Admin guard for mutating routes

use std::sync::Arc;
use warp::{Filter, Rejection};

use super::rejection::ApiError;

/// Passes when the `Authorization` header is `Bearer <admin_token>`,
/// rejects with 401 otherwise.
pub fn ensure_admin(
    admin_token: Arc<str>,
) -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::header::optional::<String>("authorization")
        .and_then(move |header: Option<String>| {
            let admin_token = admin_token.clone();
            async move {
                if is_admin(header.as_deref(), &admin_token) {
                    Ok(())
                } else {
                    tracing::debug!("rejected request without admin token");
                    Err(warp::reject::custom(ApiError::Unauthorized))
                }
            }
        })
        .untuple_one()
}

fn is_admin(header: Option<&str>, admin_token: &str) -> bool {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .is_some_and(|token| !token.is_empty() && token == admin_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin() {
        assert!(is_admin(Some("Bearer s3cret"), "s3cret"));
        assert!(!is_admin(Some("Bearer wrong"), "s3cret"));
        assert!(!is_admin(Some("s3cret"), "s3cret"));
        assert!(!is_admin(Some("Bearer "), ""));
        assert!(!is_admin(None, "s3cret"));
    }

    #[tokio::test]
    async fn test_guard_filter() {
        let filter = ensure_admin(Arc::from("s3cret")).map(|| "ok");

        let allowed = warp::test::request()
            .header("authorization", "Bearer s3cret")
            .filter(&filter)
            .await;
        assert_eq!(allowed.ok(), Some("ok"));

        let denied = warp::test::request().filter(&filter).await;
        assert!(denied.is_err());
    }
}
