//! HTTP-level integration tests for the `/projects` resource.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the
//! router without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

fn project_body(title: &str, variations: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "category": "Branding",
        "description": "test project",
        "variations": variations,
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_returns_201_with_variations(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        project_body(
            "Poster Series",
            serde_json::json!([
                {"image": "http://files.test/a.png", "color_code": "#ff0000"},
                {"image": "http://files.test/b.png", "image_scale": 1.5},
            ]),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Poster Series");
    assert!(json["id"].is_number());

    let variations = json["variations"].as_array().unwrap();
    assert_eq!(variations.len(), 2);
    // Every variation belongs to the new project; defaults applied.
    for v in variations {
        assert_eq!(v["project_id"], json["id"]);
    }
    assert_eq!(variations[0]["color_code"], "#ff0000");
    assert_eq!(variations[0]["image_scale"], 1.0);
    assert_eq!(variations[1]["color_code"], "");
    assert_eq!(variations[1]["image_scale"], 1.5);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_applies_field_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"title": "Bare", "category": "Web"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["description"], "");
    assert_eq!(json["is_multi"], false);
    assert_eq!(json["default_bg_color"], "default");
    assert_eq!(json["variations"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_project_rejects_blank_title_and_bad_color(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"title": "  ", "category": "Web"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"title": "X", "category": "Web", "default_bg_color": "magenta"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        project_body("X", serde_json::json!([{"image": ""}])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_nests_each_projects_own_variations(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = body_json(
        post_json(
            app,
            "/api/v1/projects",
            project_body("First", serde_json::json!([{"image": "u1"}, {"image": "u2"}])),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let second = body_json(
        post_json(
            app,
            "/api/v1/projects",
            project_body("Second", serde_json::json!([{"image": "u3"}])),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects").await).await;
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);

    for entry in list {
        let expected = if entry["id"] == first["id"] { 2 } else { 1 };
        assert_eq!(entry["variations"].as_array().unwrap().len(), expected);
        for v in entry["variations"].as_array().unwrap() {
            assert_eq!(v["project_id"], entry["id"]);
        }
        assert!(entry["id"] == first["id"] || entry["id"] == second["id"]);
    }
}

// ---------------------------------------------------------------------------
// Update (full variation replace)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_replaces_the_whole_variation_set(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            project_body("Mutable", serde_json::json!([{"image": "old1"}, {"image": "old2"}])),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    let old_ids: Vec<i64> = created["variations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        project_body(
            "Mutable",
            serde_json::json!([{"image": "new1"}, {"image": "new2"}, {"image": "new3"}]),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    let variations = updated["variations"].as_array().unwrap();
    assert_eq!(variations.len(), 3);
    // The prior rows are gone, not merged.
    for v in variations {
        assert!(!old_ids.contains(&v["id"].as_i64().unwrap()));
        assert_eq!(v["project_id"], updated["id"]);
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/projects/999999",
        project_body("Ghost", serde_json::json!([])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_project_removes_its_variations(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            project_body("Doomed", serde_json::json!([{"image": "x"}, {"image": "y"}])),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // No orphan variations remain.
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM variations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Reorder
// ---------------------------------------------------------------------------

async fn create_three(pool: &PgPool) -> Vec<i64> {
    let mut ids = Vec::new();
    for title in ["One", "Two", "Three"] {
        let app = common::build_test_app(pool.clone());
        let json = body_json(
            post_json(
                app,
                "/api/v1/projects",
                project_body(title, serde_json::json!([])),
            )
            .await,
        )
        .await;
        ids.push(json["id"].as_i64().unwrap());
    }
    ids
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_applies_the_submitted_order(pool: PgPool) {
    let ids = create_three(&pool).await;

    // [third, first, second]
    let new_order = vec![ids[2], ids[0], ids[1]];
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/projects/reorder",
        serde_json::json!({"ids": new_order}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects").await).await;
    let listed: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, new_order);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reorder_rejects_partial_and_duplicate_lists(pool: PgPool) {
    let ids = create_three(&pool).await;

    // Partial list.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/projects/reorder",
        serde_json::json!({"ids": [ids[0], ids[1]]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Duplicate id.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/projects/reorder",
        serde_json::json!({"ids": [ids[0], ids[0], ids[1]]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Unknown id.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/projects/reorder",
        serde_json::json!({"ids": [ids[0], ids[1], 999999]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing moved: creation order still stands.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/projects").await).await;
    let listed: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, ids);
}
