//! Black-box tests against a real PostgreSQL database.
//!
//! Ignored by default. Run with `cargo test -- --ignored` and `DATABASE_URL`
//! pointing at a server where the user may create databases: each test gets
//! its own freshly migrated database.

use chrono::{Duration, Utc};
use reqwest::StatusCode;
use serde_json::{json, Value};
use sqlx::PgPool;
use tenancy_api::{build_app, AppState, JwtKeys, Settings};
use uuid::Uuid;

const SECRET: &str = "e2e-secret";

struct TestServer {
    base_url: String,
    pool: PgPool,
    client: reqwest::Client,
    token: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(pool: PgPool) -> Self {
        let settings = Settings::from_lookup(|key: &str| match key {
            "SECRET_KEY" => Some(SECRET.into()),
            _ => None,
        })
        .unwrap();

        let admin = format!("admin_{}", Uuid::new_v4().simple());
        insert_user(&pool, &admin, true, true).await;
        let token = JwtKeys::new(SECRET.as_bytes())
            .issue(&admin, Some(Duration::minutes(10)))
            .unwrap();

        let app = build_app(AppState::new(pool.clone(), SECRET), &settings);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}/api/v1", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            base_url,
            pool,
            client: reqwest::Client::new(),
            token,
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn call(&self, method: reqwest::Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = self
            .client
            .request(method, self.url(path))
            .bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let res = request.send().await.unwrap();
        let status = res.status();
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["status_code"], status.as_u16(), "status_code mirrors HTTP status");
        (status, body)
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        self.call(reqwest::Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        self.call(reqwest::Method::POST, path, Some(body)).await
    }

    async fn put(&self, path: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.call(reqwest::Method::PUT, path, body).await
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        self.call(reqwest::Method::DELETE, path, None).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn insert_user(pool: &PgPool, username: &str, is_admin: bool, is_active: bool) -> Uuid {
    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO users (id, username, email, password, is_admin, is_active) \
         VALUES ($1, $2, $3, 'not-a-real-hash', $4, $5) \
         ON CONFLICT (username) DO UPDATE SET is_admin = EXCLUDED.is_admin, is_active = EXCLUDED.is_active \
         RETURNING id",
    )
    .bind(Uuid::new_v4())
    .bind(username)
    .bind(format!("{username}@example.com"))
    .bind(is_admin)
    .bind(is_active)
    .fetch_one(pool)
    .await
    .expect("insert user");
    id
}

fn unique(prefix: &str) -> String {
    format!("{prefix}_{}", &Uuid::new_v4().simple().to_string()[..12])
}

fn id_of(body: &Value) -> String {
    body["data"]["id"].as_str().expect("id in data").to_string()
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn permission_lifecycle(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    let name = unique("test_permission");

    let (status, body) = srv
        .post("/permissions", json!({"name": name, "description": "Test permission"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Permission created successfully");
    assert_eq!(body["data"]["name"], name.as_str());
    assert_eq!(body["data"]["description"], "Test permission");
    assert!(body.get("error").is_none());
    let id = id_of(&body);

    let (status, fetched) = srv.get(&format!("/permissions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], body["data"]);

    let renamed = unique("updated_permission");
    let (status, updated) = srv
        .put(
            &format!("/permissions/{id}"),
            Some(json!({"name": renamed, "description": "Updated permission"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["name"], renamed.as_str());
    assert_eq!(updated["data"]["description"], "Updated permission");
    assert_eq!(updated["data"]["id"], id.as_str());

    let (status, deleted) = srv.delete(&format!("/permissions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["data"]["name"], renamed.as_str());

    let (status, gone) = srv.get(&format!("/permissions/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(gone["error"], "Permission not found");
    assert!(gone.get("data").is_none());
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn duplicate_permission_name_conflicts(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    let name = unique("dup");
    let (status, _) = srv
        .post("/permissions", json!({"name": name, "description": "first"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = srv
        .post("/permissions", json!({"name": name, "description": "second"}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Permission already exists");
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn invalid_permission_input_is_400(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    for body in [
        json!({"name": "", "description": "empty name"}),
        json!({"name": "x".repeat(51), "description": "too long"}),
        json!({"name": unique("ok"), "description": "d".repeat(101)}),
        json!({"name": unique("ok")}),
    ] {
        let (status, res) = srv.post("/permissions", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(res["error"], "Invalid permission name or description format");
    }
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn missing_and_malformed_ids_are_404(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    let missing = Uuid::new_v4();
    let (status, _) = srv.get(&format!("/permissions/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = srv
        .put(
            &format!("/permissions/{missing}"),
            Some(json!({"name": unique("p"), "description": "d"})),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = srv.delete(&format!("/permissions/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = srv.get("/permissions/not-a-uuid").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn pagination_windows_and_bounds(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    for i in 0..3 {
        let (status, _) = srv
            .post("/permissions", json!({"name": unique(&format!("page{i}")), "description": "p"}))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, body) = srv.get("/permissions?skip=0&limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Permissions fetched successfully");
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (status, body) = srv.get("/permissions?limit=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());

    let (status, _) = srv.get("/permissions?skip=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = srv.get("/permissions?limit=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn non_admin_and_unknown_users_are_401(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    let keys = JwtKeys::new(SECRET.as_bytes());

    let plain = unique("plain");
    insert_user(&srv.pool, &plain, false, true).await;
    let inactive = unique("inactive");
    insert_user(&srv.pool, &inactive, true, false).await;

    for (username, message) in [
        (plain.as_str(), "Admin privileges required"),
        (inactive.as_str(), "Admin privileges required"),
        ("nobody-by-this-name", "Could not validate credentials"),
    ] {
        let token = keys.issue(username, None).unwrap();
        let res = srv
            .client
            .get(srv.url("/permissions"))
            .bearer_auth(token)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], message);
    }

    let name = unique("never_created");
    let token = keys.issue(&plain, None).unwrap();
    let res = srv
        .client
        .post(srv.url("/permissions"))
        .bearer_auth(token)
        .json(&json!({"name": name, "description": "should not persist"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let (count,): (i64,) = sqlx::query_as("SELECT count(*) FROM permissions WHERE name = $1")
        .bind(&name)
        .fetch_one(&srv.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn roles_belong_to_organizations_and_cascade(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;

    let (status, org) = srv
        .post("/organizations", json!({"name": unique("acme"), "description": "Acme Inc"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let org_id = id_of(&org);

    let (status, role) = srv
        .post("/roles", json!({"role_name": "editor", "organization_id": org_id}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(role["data"]["is_active"], true);
    let role_id = id_of(&role);

    let (status, _) = srv
        .post("/roles", json!({"role_name": "ghost", "organization_id": Uuid::new_v4()}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = srv.delete(&format!("/organizations/{org_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = srv.get(&format!("/roles/{role_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn role_permissions_can_be_granted_and_revoked(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    let (_, org) = srv.post("/organizations", json!({"name": unique("org")})).await;
    let (_, role) = srv
        .post("/roles", json!({"role_name": "admin", "organization_id": id_of(&org)}))
        .await;
    let role_id = id_of(&role);
    let (_, perm) = srv
        .post("/permissions", json!({"name": unique("read"), "description": "read things"}))
        .await;
    let perm_id = id_of(&perm);

    let path = format!("/roles/{role_id}/permissions/{perm_id}");
    let (status, _) = srv.put(&path, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = srv.put(&path, None).await;
    assert_eq!(status, StatusCode::OK, "granting twice is idempotent");

    let (status, granted) = srv.get(&format!("/roles/{role_id}/permissions")).await;
    assert_eq!(status, StatusCode::OK);
    let granted = granted["data"].as_array().unwrap();
    assert_eq!(granted.len(), 1);
    assert_eq!(granted[0]["id"], perm_id.as_str());

    let (status, _) = srv.delete(&path).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = srv.delete(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = srv
        .put(&format!("/roles/{role_id}/permissions/{}", Uuid::new_v4()), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Permission not found");
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn memberships_and_user_roles(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    let user_id = insert_user(&srv.pool, &unique("member"), false, true).await;
    let (_, org) = srv.post("/organizations", json!({"name": unique("team")})).await;
    let org_id = id_of(&org);
    let (_, role) = srv
        .post("/roles", json!({"role_name": "viewer", "organization_id": org_id}))
        .await;
    let role_id = id_of(&role);

    let (status, link) = srv
        .put(&format!("/organizations/{org_id}/members/{user_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(link["data"]["left_id"], user_id.to_string());
    assert_eq!(link["data"]["right_id"], org_id.as_str());

    let (status, body) = srv
        .put(&format!("/organizations/{org_id}/members/{}", Uuid::new_v4()), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, _) = srv.put(&format!("/users/{user_id}/roles/{role_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = srv.delete(&format!("/users/{user_id}/roles/{role_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = srv
        .delete(&format!("/organizations/{org_id}/members/{user_id}"))
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn blogs_are_soft_deleted(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    let author = insert_user(&srv.pool, &unique("author"), false, true).await;
    let (status, blog) = srv
        .post(
            "/blogs",
            json!({"author_id": author, "title": "Hello", "tags": ["rust", "axum"]}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(blog["data"]["tags"], json!(["rust", "axum"]));
    let id = id_of(&blog);

    let (status, _) = srv.delete(&format!("/blogs/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = srv.get(&format!("/blogs/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (still_there,): (bool,) = sqlx::query_as("SELECT is_deleted FROM blogs WHERE id = $1")
        .bind(Uuid::parse_str(&id).unwrap())
        .fetch_one(&srv.pool)
        .await
        .unwrap();
    assert!(still_there);
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn owned_content_validation_and_conflicts(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    let owner = insert_user(&srv.pool, &unique("owner"), false, true).await;

    let (status, job) = srv
        .post(
            "/jobs",
            json!({"user_id": owner, "title": "Engineer", "description": "Build", "salary": 1234.5}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(job["data"]["salary"], 1234.5);
    let (status, job) = srv
        .post(
            "/jobs",
            json!({"user_id": owner, "title": "Analyst", "description": "Count", "salary": "99999999.99"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (stored,): (String,) = sqlx::query_as("SELECT salary::text FROM jobs WHERE id = $1")
        .bind(Uuid::parse_str(&id_of(&job)).unwrap())
        .fetch_one(&srv.pool)
        .await
        .unwrap();
    assert_eq!(stored, "99999999.99");
    for salary in [json!(-1), json!(12.345), json!("100000000")] {
        let (status, body) = srv
            .post(
                "/jobs",
                json!({"user_id": owner, "title": "Engineer", "description": "Build", "salary": salary}),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "salary {salary}");
        assert_eq!(body["error"], "Invalid job listing");
    }

    let (status, _) = srv
        .post("/profiles", json!({"user_id": owner, "bio": "hi", "phone_number": "+1 555 0100"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = srv.post("/profiles", json!({"user_id": owner})).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = srv
        .post(
            "/invitations",
            json!({
                "user_id": owner,
                "organization_id": Uuid::new_v4(),
                "expires_at": Utc::now() - Duration::days(1),
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, sub) = srv
        .post("/subscriptions", json!({"user_id": owner, "plan": "pro"}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(sub["data"]["start_date"].is_string());
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn deleting_a_user_removes_owned_rows(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    let owner = insert_user(&srv.pool, &unique("leaving"), false, true).await;
    let (_, job) = srv
        .post("/jobs", json!({"user_id": owner, "title": "Temp", "description": "Short"}))
        .await;
    let job_id = id_of(&job);

    let (status, user) = srv.get(&format!("/users/{owner}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(user["data"].get("password").is_none());

    let (status, _) = srv.delete(&format!("/users/{owner}")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = srv.get(&format!("/jobs/{job_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test]
#[ignore = "needs PostgreSQL (DATABASE_URL)"]
async fn subscription_end_must_follow_its_stored_or_default_start(pool: PgPool) {
    let srv = TestServer::spawn(pool).await;
    let owner = insert_user(&srv.pool, &unique("subscriber"), false, true).await;

    // Start defaults to now, so an end in the past is rejected.
    let (status, body) = srv
        .post(
            "/subscriptions",
            json!({"user_id": owner, "plan": "pro", "end_date": "2000-01-01T00:00:00Z"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid subscription details");

    let (status, sub) = srv
        .post(
            "/subscriptions",
            json!({"user_id": owner, "plan": "pro", "start_date": "2030-01-01T00:00:00Z"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = id_of(&sub);

    // The stored start is kept when omitted, and the new end must follow it.
    let (status, body) = srv
        .put(
            &format!("/subscriptions/{id}"),
            Some(json!({"user_id": owner, "plan": "pro", "end_date": "2001-01-01T00:00:00Z"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid subscription details");

    let (status, body) = srv
        .put(
            &format!("/subscriptions/{id}"),
            Some(json!({"user_id": owner, "plan": "pro", "end_date": "2031-01-01T00:00:00Z"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["start_date"].as_str().unwrap().starts_with("2030-01-01"));

    let (status, fetched) = srv.get(&format!("/subscriptions/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(fetched["data"]["end_date"].as_str().unwrap().starts_with("2031-01-01"));
}
