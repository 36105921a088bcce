pub mod airdrops;
pub mod auth;
pub mod categories;
pub mod error;
pub mod health;
pub mod preferences;
pub mod social_accounts;
pub mod wallets;

use axum::Router;

use crate::bootstrap::app_context::AppContext;

/// Every API route, without the outer CORS/trace layers.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .nest("/api", health::routes(ctx.clone()))
        .nest("/api/auth", auth::routes(ctx.clone()))
        .nest("/api", airdrops::routes(ctx.clone()))
        .nest("/api", wallets::routes(ctx.clone()))
        .nest("/api", social_accounts::routes(ctx.clone()))
        .nest("/api", categories::routes(ctx.clone()))
        .nest("/api", preferences::routes(ctx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::app_context::testing::memory_context;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn call(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(t) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {t}"));
        }
        let req = match body {
            Some(b) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => req.body(Body::empty()).unwrap(),
        };
        let res = app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn signed_in(app: &Router, email: &str) -> String {
        let (status, _) = call(
            app,
            "POST",
            "/api/auth/register",
            None,
            Some(json!({"email": email, "name": "", "password": "hunter22"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = call(
            app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": email, "password": "hunter22"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["access_token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = router(memory_context());
        let (status, body) = call(&app, "GET", "/api/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn protected_routes_require_token() {
        let app = router(memory_context());
        let (status, body) = call(&app, "GET", "/api/airdrops", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "Unauthorized");
        let (status, _) = call(&app, "GET", "/api/wallets", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn register_login_and_me() {
        let app = router(memory_context());
        let token = signed_in(&app, "Alice@Example.com").await;
        let (status, me) = call(&app, "GET", "/api/auth/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(me["email"], "alice@example.com");
        assert_eq!(me["name"], "alice");

        let (status, body) = call(
            &app,
            "POST",
            "/api/auth/register",
            None,
            Some(json!({"email": "alice@example.com", "password": "another1"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(body["error"].is_string());

        let (status, _) = call(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "alice@example.com", "password": "wrong-pass"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn airdrop_crud_and_dashboard() {
        let app = router(memory_context());
        let token = signed_in(&app, "bob@example.com").await;

        let (status, wallet) = call(
            &app,
            "POST",
            "/api/wallets",
            Some(&token),
            Some(json!({"name": "Main", "address": "0x71C7656EC7ab88b098defB751B7401B5f6d8976F"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, created) = call(
            &app,
            "POST",
            "/api/airdrops",
            Some(&token),
            Some(json!({
                "name": "LayerZero",
                "categories": ["Testnet"],
                "status": "claimed",
                "reward": "120.5 ZRO",
                "notes": "",
                "selected_wallet": wallet["id"],
                "selected_twitter": ""
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["reward"], 120.5);
        assert_eq!(created["notes"], Value::Null);
        let id = created["id"].as_str().unwrap().to_string();

        let (status, _) = call(
            &app,
            "POST",
            "/api/airdrops",
            Some(&token),
            Some(json!({"name": "Scroll"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, dash) = call(
            &app,
            "GET",
            "/api/airdrops?status=claimed",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(dash["filter"], "claimed");
        assert_eq!(dash["items"].as_array().unwrap().len(), 1);
        assert_eq!(dash["items"][0]["status_label"], "Claimed");
        assert_eq!(dash["items"][0]["wallet_label"], "Main: 0x71C7...976F");
        assert_eq!(dash["pagination"]["total_items"], 1);
        assert_eq!(dash["stats"]["total"], 2);
        assert_eq!(dash["stats"]["total_earnings"], 120.5);

        let (status, updated) = call(
            &app,
            "PUT",
            &format!("/api/airdrops/{id}"),
            Some(&token),
            Some(json!({"name": "LayerZero S2", "status": "ongoing"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "LayerZero S2");
        assert_eq!(updated["reward"], Value::Null);

        let (status, stats) = call(&app, "GET", "/api/stats", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stats["ongoing"], 2);
        assert_eq!(stats["total_earnings"], 0.0);

        let (status, body) = call(
            &app,
            "POST",
            "/api/airdrops",
            Some(&token),
            Some(json!({"name": "  "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "name is required");

        let (status, _) = call(
            &app,
            "DELETE",
            &format!("/api/airdrops/{id}"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = call(
            &app,
            "GET",
            &format!("/api/airdrops/{id}"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn airdrop_references_must_be_own_and_match_platform() {
        let app = router(memory_context());
        let erin = signed_in(&app, "erin@example.com").await;
        let frank = signed_in(&app, "frank@example.com").await;

        let (_, discord) = call(
            &app,
            "POST",
            "/api/social-accounts",
            Some(&erin),
            Some(json!({"type": "discord", "username": "disc#1"})),
        )
        .await;
        let (_, franks_wallet) = call(
            &app,
            "POST",
            "/api/wallets",
            Some(&frank),
            Some(json!({"name": "Frank", "address": "0xfeed"})),
        )
        .await;

        let (status, body) = call(
            &app,
            "POST",
            "/api/airdrops",
            Some(&erin),
            Some(json!({"name": "Mixed", "selected_twitter": discord["id"]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("selected_twitter"));

        let (status, _) = call(
            &app,
            "POST",
            "/api/airdrops",
            Some(&erin),
            Some(json!({"name": "Borrowed", "selected_wallet": franks_wallet["id"]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, created) = call(
            &app,
            "POST",
            "/api/airdrops",
            Some(&erin),
            Some(json!({"name": "Fine", "selected_discord": discord["id"]})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let (_, dash) = call(&app, "GET", "/api/airdrops", Some(&erin), None).await;
        assert_eq!(dash["items"][0]["discord_label"], "disc#1");
        assert_eq!(dash["items"][0]["twitter_label"], Value::Null);

        let (status, _) = call(
            &app,
            "PUT",
            &format!("/api/airdrops/{}", created["id"].as_str().unwrap()),
            Some(&erin),
            Some(json!({"name": "Fine", "selected_wallet": franks_wallet["id"]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn listed_default_category_can_be_deleted() {
        let app = router(memory_context());
        let token = signed_in(&app, "gina@example.com").await;
        let (_, cats) = call(&app, "GET", "/api/categories", Some(&token), None).await;
        let id = cats["items"][0]["id"].as_str().unwrap().to_string();
        let (status, _) = call(
            &app,
            "DELETE",
            &format!("/api/categories/{id}"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, cats) = call(&app, "GET", "/api/categories", Some(&token), None).await;
        assert_eq!(cats["items"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn other_users_rows_are_invisible() {
        let app = router(memory_context());
        let alice = signed_in(&app, "alice@example.com").await;
        let mallory = signed_in(&app, "mallory@example.com").await;

        let (_, created) = call(
            &app,
            "POST",
            "/api/airdrops",
            Some(&alice),
            Some(json!({"name": "Private"})),
        )
        .await;
        let uri = format!("/api/airdrops/{}", created["id"].as_str().unwrap());

        let (status, _) = call(&app, "GET", &uri, Some(&mallory), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = call(
            &app,
            "PUT",
            &uri,
            Some(&mallory),
            Some(json!({"name": "Hijacked"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _) = call(&app, "DELETE", &uri, Some(&mallory), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = call(&app, "GET", &uri, Some(&alice), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Private");
    }

    #[tokio::test]
    async fn settings_endpoints() {
        let app = router(memory_context());
        let token = signed_in(&app, "carol@example.com").await;

        let (_, cats) = call(&app, "GET", "/api/categories", Some(&token), None).await;
        assert_eq!(cats["items"].as_array().unwrap().len(), 7);
        let (status, _) = call(
            &app,
            "POST",
            "/api/categories",
            Some(&token),
            Some(json!({"name": "daily"})),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, acct) = call(
            &app,
            "POST",
            "/api/social-accounts",
            Some(&token),
            Some(json!({"type": "discord", "username": " carol#1 "})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(acct["type"], "discord");
        assert_eq!(acct["username"], "carol#1");
        let (status, _) = call(
            &app,
            "POST",
            "/api/social-accounts",
            Some(&token),
            Some(json!({"type": "myspace", "username": "x"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, list) = call(
            &app,
            "GET",
            "/api/social-accounts?type=twitter",
            Some(&token),
            None,
        )
        .await;
        assert!(list["items"].as_array().unwrap().is_empty());

        let (_, theme) = call(&app, "GET", "/api/preferences/theme", Some(&token), None).await;
        assert_eq!(theme["theme"], "light");
        let (status, theme) = call(
            &app,
            "PUT",
            "/api/preferences/theme",
            Some(&token),
            Some(json!({"theme": "dark"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(theme["theme"], "dark");

        let (status, _) = call(
            &app,
            "DELETE",
            &format!("/api/wallets/{}", uuid::Uuid::new_v4()),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn deleting_account_revokes_access() {
        let app = router(memory_context());
        let token = signed_in(&app, "dave@example.com").await;
        call(
            &app,
            "POST",
            "/api/airdrops",
            Some(&token),
            Some(json!({"name": "Gone soon"})),
        )
        .await;
        let (status, _) = call(&app, "DELETE", "/api/auth/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = call(&app, "GET", "/api/auth/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let (status, _) = call(
            &app,
            "POST",
            "/api/auth/login",
            None,
            Some(json!({"email": "dave@example.com", "password": "hunter22"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
