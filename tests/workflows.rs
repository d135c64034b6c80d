//! End-to-end workflows against a real PostgreSQL database.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use buzzarfeed::app::App;
use serde_json::{json, Value};
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "buzzarfeed-test-boundary";

struct Harness {
    router: Router,
    pool: PgPool,
    uploads: TempDir,
}

impl Harness {
    fn new(pool: PgPool) -> Self {
        let uploads = TempDir::new().unwrap();
        let router = App::router(common::context(pool.clone(), uploads.path()));

        Self {
            router,
            pool,
            uploads,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    async fn try_sign_up(&self, name: &str, email: &str) -> (StatusCode, Value) {
        self.json(
            Method::POST,
            "/api/auth/sign-up",
            None,
            json!({
                "name": name,
                "email": email,
                "confirm_email": email,
                "password": "Lantern2024",
                "confirm_password": "Lantern2024",
            }),
        )
        .await
    }

    async fn sign_up(&self, name: &str, email: &str) -> String {
        let (status, body) = self.try_sign_up(name, email).await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);

        body["data"]["token"].as_str().unwrap().to_string()
    }

    async fn sign_up_admin(&self, email: &str) -> String {
        let token = self.sign_up("Market Admin", email).await;
        sqlx::query("UPDATE users SET user_type_id = 3 WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .unwrap();

        token
    }

    async fn try_submit_application(&self, token: &str, stall_name: &str) -> (StatusCode, Value) {
        let mut body = String::new();
        for (name, value) in [
            ("stall_name", stall_name),
            ("description", "Charcoal-grilled skewers every night"),
            ("categories", "Grilled"),
            ("categories", "Street Food"),
            ("address", "Row C, Stall 12"),
        ] {
            body.push_str(&format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"business_permit\"; filename=\"permit.pdf\"\r\nContent-Type: application/pdf\r\n\r\n%PDF-1.4 permit\r\n--{BOUNDARY}--\r\n"
        ));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/applications")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::from(body))
            .unwrap();

        self.send(request).await
    }

    async fn submit_application(&self, token: &str, stall_name: &str) -> Value {
        let (status, body) = self.try_submit_application(token, stall_name).await;
        assert_eq!(status, StatusCode::CREATED, "{}", body);

        body["data"].clone()
    }

    async fn open_stall(&self, owner: &str, admin: &str, stall_name: &str) -> String {
        let application = self.submit_application(owner, stall_name).await;
        let (status, body) = self
            .json(
                Method::POST,
                &format!(
                    "/api/admin/applications/{}/approve",
                    application["id"].as_str().unwrap()
                ),
                Some(admin),
                Value::Null,
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{}", body);

        body["data"]["stall"]["id"].as_str().unwrap().to_string()
    }

    async fn count(&self, sql: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn approving_an_application_opens_the_stall(pool: PgPool) {
    let harness = Harness::new(pool);
    let applicant = harness.sign_up("Tala Reyes", "tala@example.com").await;
    let admin = harness.sign_up_admin("admin@example.com").await;

    let application = harness.submit_application(&applicant, "Tala's Isaw").await;
    let id = application["id"].as_str().unwrap();

    let (status, body) = harness
        .json(
            Method::POST,
            &format!("/api/admin/applications/{}/approve", id),
            Some(&admin),
            json!({ "notes": "Permits check out" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["stall"]["name"], json!("Tala's Isaw"));

    let (status, body) = harness
        .json(Method::GET, "/api/stalls/mine", Some(&applicant), Value::Null)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM users WHERE email = 'tala@example.com' AND user_type_id = 2")
            .await,
        1
    );
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM session_tokens WHERE user_type_id = 2")
            .await,
        1
    );
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM admin_logs WHERE action = 'approve_application'")
            .await,
        1
    );

    let (status, _) = harness
        .json(
            Method::POST,
            &format!("/api/admin/applications/{}/approve", id),
            Some(&admin),
            Value::Null,
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(harness.count("SELECT COUNT(*) FROM food_stalls").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn declining_an_application_removes_it_and_its_documents(pool: PgPool) {
    let harness = Harness::new(pool);
    let applicant = harness.sign_up("Bayani Cruz", "bayani@example.com").await;
    let admin = harness.sign_up_admin("admin@example.com").await;

    let application = harness.submit_application(&applicant, "Bayani's Balut").await;
    let id = application["id"].as_str().unwrap();
    let document = harness
        .uploads
        .path()
        .join(application["documents"][0]["path"].as_str().unwrap());
    assert!(document.exists());

    let (status, body) = harness
        .json(
            Method::POST,
            &format!("/api/admin/applications/{}/decline", id),
            Some(&admin),
            json!({ "reason": "Business permit has expired" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    assert!(!document.exists());
    assert_eq!(harness.count("SELECT COUNT(*) FROM applications").await, 0);
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM admin_logs WHERE action = 'decline_application'")
            .await,
        1
    );

    // The applicant may try again straight away.
    harness.submit_application(&applicant, "Bayani's Balut").await;
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn deleting_an_account_removes_everything_it_owns(pool: PgPool) {
    let harness = Harness::new(pool);
    let owner = harness.sign_up("Amihan Santos", "amihan@example.com").await;
    let reviewer = harness.sign_up("Dalisay Lim", "dalisay@example.com").await;
    let admin = harness.sign_up_admin("admin@example.com").await;

    let application = harness.submit_application(&owner, "Amihan's Turon").await;
    let (_, body) = harness
        .json(
            Method::POST,
            &format!(
                "/api/admin/applications/{}/approve",
                application["id"].as_str().unwrap()
            ),
            Some(&admin),
            Value::Null,
        )
        .await;
    let stall_id = body["data"]["stall"]["id"].as_str().unwrap().to_string();

    let (status, body) = harness
        .json(
            Method::POST,
            &format!("/api/stalls/{}/reviews", stall_id),
            Some(&reviewer),
            json!({ "rating": 5, "comment": "Crispy and sweet" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let review_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, _) = harness
        .json(
            Method::POST,
            &format!("/api/reviews/{}/reactions", review_id),
            Some(&owner),
            json!({ "reaction": "helpful" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = harness
        .json(
            Method::DELETE,
            "/api/users/profile",
            Some(&reviewer),
            json!({ "confirm_email": "someone-else@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = harness
        .json(
            Method::DELETE,
            "/api/users/profile",
            Some(&reviewer),
            json!({ "confirm_email": "DALISAY@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    assert_eq!(harness.count("SELECT COUNT(*) FROM reviews").await, 0);
    assert_eq!(harness.count("SELECT COUNT(*) FROM review_reactions").await, 0);
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM users WHERE email = 'dalisay@example.com'")
            .await,
        0
    );

    let (status, _) = harness
        .json(Method::GET, "/api/users/profile", Some(&reviewer), Value::Null)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = harness
        .json(
            Method::DELETE,
            "/api/users/profile",
            Some(&owner),
            json!({ "confirm_email": "amihan@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(harness.count("SELECT COUNT(*) FROM food_stalls").await, 0);
    assert_eq!(harness.count("SELECT COUNT(*) FROM applications").await, 0);
    assert_eq!(harness.count("SELECT COUNT(*) FROM application_reviews").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn admins_with_history_cannot_delete_their_account(pool: PgPool) {
    let harness = Harness::new(pool);
    let applicant = harness.sign_up("Luningning Tan", "luningning@example.com").await;
    let admin = harness.sign_up_admin("admin@example.com").await;

    let application = harness.submit_application(&applicant, "Luning's Lugaw").await;
    harness
        .json(
            Method::POST,
            &format!(
                "/api/admin/applications/{}/archive",
                application["id"].as_str().unwrap()
            ),
            Some(&admin),
            Value::Null,
        )
        .await;

    let (status, _) = harness
        .json(
            Method::DELETE,
            "/api/users/profile",
            Some(&admin),
            json!({ "confirm_email": "admin@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM users WHERE email = 'admin@example.com'")
            .await,
        1
    );
}

fn sorted_statuses(statuses: [StatusCode; 2]) -> Vec<u16> {
    let mut statuses = statuses.map(|status| status.as_u16()).to_vec();
    statuses.sort();
    statuses
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn concurrent_submissions_leave_one_pending_application(pool: PgPool) {
    let harness = Harness::new(pool);
    let applicant = harness.sign_up("Marikit Dela Paz", "marikit@example.com").await;

    let ((first, _), (second, _)) = tokio::join!(
        harness.try_submit_application(&applicant, "Marikit's Kwek-Kwek"),
        harness.try_submit_application(&applicant, "Marikit's Kwek-Kwek"),
    );

    assert_eq!(
        sorted_statuses([first, second]),
        vec![201, 409]
    );
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM applications WHERE current_status_id = 1")
            .await,
        1
    );

    // The losing request's upload is not left behind.
    let stored = std::fs::read_dir(harness.uploads.path().join("applications"))
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(stored, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn concurrent_closure_requests_leave_one_pending(pool: PgPool) {
    let harness = Harness::new(pool);
    let owner = harness.sign_up("Ligaya Ramos", "ligaya@example.com").await;
    let admin = harness.sign_up_admin("admin@example.com").await;
    let stall_id = harness.open_stall(&owner, &admin, "Ligaya's Fishball").await;
    let uri = format!("/api/stalls/{}/closures", stall_id);

    let ((first, _), (second, _)) = tokio::join!(
        harness.json(
            Method::POST,
            &uri,
            Some(&owner),
            json!({ "reason": "Moving to another market" }),
        ),
        harness.json(
            Method::POST,
            &uri,
            Some(&owner),
            json!({ "reason": "Moving to another market" }),
        ),
    );

    assert_eq!(
        sorted_statuses([first, second]),
        vec![201, 409]
    );
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM stall_closures WHERE current_status_id = 1")
            .await,
        1
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn concurrent_sign_ups_with_one_email_conflict(pool: PgPool) {
    let harness = Harness::new(pool);

    let ((first, _), (second, _)) = tokio::join!(
        harness.try_sign_up("Rosa Villanueva", "rosa@example.com"),
        harness.try_sign_up("Rosa Villanueva", "rosa@example.com"),
    );

    assert_eq!(
        sorted_statuses([first, second]),
        vec![201, 409]
    );
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM users WHERE email = 'rosa@example.com'")
            .await,
        1
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn failed_approval_rolls_back_every_step(pool: PgPool) {
    let harness = Harness::new(pool);
    let applicant = harness.sign_up("Perla Gomez", "perla@example.com").await;
    let admin = harness.sign_up_admin("admin@example.com").await;

    let application = harness.submit_application(&applicant, "Perla's Bibingka").await;
    let id = application["id"].as_str().unwrap();

    // The audit log insert is the last step inside the transaction.
    sqlx::query("DROP TABLE admin_logs")
        .execute(&harness.pool)
        .await
        .unwrap();

    let (status, body) = harness
        .json(
            Method::POST,
            &format!("/api/admin/applications/{}/approve", id),
            Some(&admin),
            Value::Null,
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", body);

    assert_eq!(harness.count("SELECT COUNT(*) FROM food_stalls").await, 0);
    assert_eq!(harness.count("SELECT COUNT(*) FROM stall_locations").await, 0);
    assert_eq!(harness.count("SELECT COUNT(*) FROM application_reviews").await, 0);
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM applications WHERE current_status_id = 1")
            .await,
        1
    );
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM users WHERE email = 'perla@example.com' AND user_type_id = 1")
            .await,
        1
    );
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM session_tokens WHERE user_type_id = 2")
            .await,
        0
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn failed_decline_keeps_the_application_and_its_documents(pool: PgPool) {
    let harness = Harness::new(pool);
    let applicant = harness.sign_up("Imelda Bautista", "imelda@example.com").await;
    let admin = harness.sign_up_admin("admin@example.com").await;

    let application = harness.submit_application(&applicant, "Imelda's Taho").await;
    let id = application["id"].as_str().unwrap();
    let document = harness
        .uploads
        .path()
        .join(application["documents"][0]["path"].as_str().unwrap());

    sqlx::query("DROP TABLE admin_logs")
        .execute(&harness.pool)
        .await
        .unwrap();

    let (status, body) = harness
        .json(
            Method::POST,
            &format!("/api/admin/applications/{}/decline", id),
            Some(&admin),
            json!({ "reason": "Business permit has expired" }),
        )
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", body);

    assert!(document.exists());
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM applications WHERE current_status_id = 1")
            .await,
        1
    );
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn cookie_sessions_need_the_csrf_header_to_mutate(pool: PgPool) {
    let harness = Harness::new(pool);
    let (status, body) = harness.try_sign_up("Nilo Aquino", "nilo@example.com").await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let token = body["data"]["token"].as_str().unwrap().to_string();
    let csrf_token = body["data"]["csrf_token"].as_str().unwrap().to_string();

    let update = |csrf: Option<&str>| {
        let mut builder = Request::builder()
            .method(Method::PUT)
            .uri("/api/users/profile")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::COOKIE, format!("buzzarfeed_session={}", token));
        if let Some(csrf) = csrf {
            builder = builder.header("x-csrf-token", csrf);
        }
        builder
            .body(Body::from(json!({ "name": "Nilo A." }).to_string()))
            .unwrap()
    };

    let (status, body) = harness.send(update(None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], json!("Invalid CSRF token"));

    let (status, _) = harness.send(update(Some("not-the-token"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        harness
            .count("SELECT COUNT(*) FROM users WHERE name = 'Nilo Aquino'")
            .await,
        1
    );

    let (status, body) = harness.send(update(Some(csrf_token.as_str()))).await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["name"], json!("Nilo A."));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn submitting_an_application_leaves_a_flash_for_the_next_page(pool: PgPool) {
    let harness = Harness::new(pool);
    let applicant = harness.sign_up("Dolores Mercado", "dolores@example.com").await;

    harness.submit_application(&applicant, "Dolores' Puto Bumbong").await;

    let (status, body) = harness
        .json(Method::GET, "/api/auth/session", Some(&applicant), Value::Null)
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["data"]["flash"]["kind"], json!("info"));

    let (_, body) = harness
        .json(Method::GET, "/api/auth/session", Some(&applicant), Value::Null)
        .await;
    assert_eq!(body["data"]["flash"], Value::Null);
}
