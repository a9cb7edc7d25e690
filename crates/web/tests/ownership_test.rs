mod common;

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use common::{TestRequest, build_tree, signed_up, test_app};

#[tokio::test]
async fn foreign_and_missing_sets_are_indistinguishable() {
    let app = test_app();
    let (alice, workout_id) = signed_up(&app.router, "alice@example.com").await;
    let (bob, _) = signed_up(&app.router, "bob@example.com").await;
    let tree = build_tree(&app.router, &alice, &workout_id).await;

    let foreign = TestRequest::get(&format!("/api/sets/{}", tree.set_id))
        .bearer(&bob)
        .send(&app.router)
        .await;
    let missing = TestRequest::get(&format!("/api/sets/{}", Uuid::new_v4()))
        .bearer(&bob)
        .send(&app.router)
        .await;

    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(foreign.body, missing.body);
    assert_eq!(foreign.error(), "NotFound");
}

#[tokio::test]
async fn another_user_gets_not_found_on_every_level() {
    let app = test_app();
    let (alice, workout_id) = signed_up(&app.router, "alice@example.com").await;
    let (bob, _) = signed_up(&app.router, "bob@example.com").await;
    let tree = build_tree(&app.router, &alice, &workout_id).await;

    let attempts = [
        TestRequest::get(&format!("/api/workouts/{workout_id}")),
        TestRequest::put(&format!("/api/workouts/{workout_id}")).json(&json!({ "name": "Mine" })),
        TestRequest::delete(&format!("/api/workouts/{workout_id}")),
        TestRequest::get(&format!("/api/workouts/{workout_id}/sessions")),
        TestRequest::post(&format!("/api/workouts/{workout_id}/sessions")).json(&json!({})),
        TestRequest::get(&format!("/api/sessions/{}", tree.session_id)),
        TestRequest::delete(&format!("/api/sessions/{}", tree.session_id)),
        TestRequest::post(&format!("/api/sessions/{}/exercises", tree.session_id))
            .json(&json!({ "exercise_id": common::BENCH_PRESS })),
        TestRequest::put(&format!("/api/session-exercises/{}", tree.session_exercise_id))
            .json(&json!({ "exercise_number": 2 })),
        TestRequest::post(&format!("/api/session-exercises/{}/sets", tree.session_exercise_id))
            .json(&json!({ "weight": "20", "reps": 10 })),
        TestRequest::put(&format!("/api/sets/{}", tree.set_id)).json(&json!({ "reps": 1 })),
        TestRequest::delete(&format!("/api/sets/{}", tree.set_id)),
    ];

    for attempt in attempts {
        let response = attempt.bearer(&bob).send(&app.router).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{}", response.json());
        assert_eq!(response.error(), "NotFound");
    }

    // nothing Bob tried changed Alice's data
    let set = TestRequest::get(&format!("/api/sets/{}", tree.set_id))
        .bearer(&alice)
        .send(&app.router)
        .await;
    assert_eq!(set.status, StatusCode::OK);
    assert_eq!(set.data()["reps"], 5);
}

#[tokio::test]
async fn workout_list_only_shows_own_workouts() {
    let app = test_app();
    let (alice, _) = signed_up(&app.router, "alice@example.com").await;
    let (bob, _) = signed_up(&app.router, "bob@example.com").await;

    TestRequest::post("/api/workouts")
        .bearer(&alice)
        .json(&json!({ "name": "Arms" }))
        .send(&app.router)
        .await;

    let bobs = TestRequest::get("/api/workouts")
        .bearer(&bob)
        .send(&app.router)
        .await;
    assert_eq!(bobs.data().as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unparsable_id_is_not_found() {
    let app = test_app();
    let (alice, _) = signed_up(&app.router, "alice@example.com").await;

    let response = TestRequest::get("/api/sets/not-a-uuid")
        .bearer(&alice)
        .send(&app.router)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error(), "NotFound");
}
