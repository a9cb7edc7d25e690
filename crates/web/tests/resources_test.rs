mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{BENCH_PRESS, TestRequest, build_tree, signed_up, test_app};

#[tokio::test]
async fn creates_return_location_of_the_new_resource() {
    let app = test_app();
    let (token, _) = signed_up(&app.router, "lifter@example.com").await;

    let workout = TestRequest::post("/api/workouts")
        .bearer(&token)
        .json(&json!({ "name": "Upper" }))
        .send(&app.router)
        .await;
    assert_eq!(workout.status, StatusCode::CREATED);
    let workout_id = workout.id("workout_id");
    let location = format!("/api/workouts/{workout_id}");
    assert_eq!(workout.location(), Some(location.as_str()));

    let session = TestRequest::post(&format!("/api/workouts/{workout_id}/sessions"))
        .bearer(&token)
        .json(&json!({}))
        .send(&app.router)
        .await;
    assert_eq!(session.status, StatusCode::CREATED);
    let location = format!("/api/sessions/{}", session.id("session_id"));
    assert_eq!(session.location(), Some(location.as_str()));

    let fetched = TestRequest::get(&location)
        .bearer(&token)
        .send(&app.router)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["workout_id"], workout_id.as_str());
}

#[tokio::test]
async fn duplicate_workout_name_conflicts() {
    let app = test_app();
    let (token, _) = signed_up(&app.router, "lifter@example.com").await;

    let response = TestRequest::post("/api/workouts")
        .bearer(&token)
        .json(&json!({ "name": "Push" }))
        .send(&app.router)
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error(), "NameAlreadyExists");
    assert!(response.location().is_none());
}

#[tokio::test]
async fn deleting_a_session_exercise_removes_its_sets() {
    let app = test_app();
    let (token, workout_id) = signed_up(&app.router, "lifter@example.com").await;
    let tree = build_tree(&app.router, &token, &workout_id).await;

    let deleted = TestRequest::delete(&format!("/api/session-exercises/{}", tree.session_exercise_id))
        .bearer(&token)
        .send(&app.router)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json()["success"], true);

    let set = TestRequest::get(&format!("/api/sets/{}", tree.set_id))
        .bearer(&token)
        .send(&app.router)
        .await;
    assert_eq!(set.status, StatusCode::NOT_FOUND);
    assert_eq!(set.error(), "NotFound");

    // the session itself is untouched
    let session = TestRequest::get(&format!("/api/sessions/{}", tree.session_id))
        .bearer(&token)
        .send(&app.router)
        .await;
    assert_eq!(session.status, StatusCode::OK);
}

#[tokio::test]
async fn deleting_a_workout_removes_the_whole_tree() {
    let app = test_app();
    let (token, workout_id) = signed_up(&app.router, "lifter@example.com").await;
    let tree = build_tree(&app.router, &token, &workout_id).await;

    let deleted = TestRequest::delete(&format!("/api/workouts/{workout_id}"))
        .bearer(&token)
        .send(&app.router)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    for path in [
        format!("/api/sessions/{}", tree.session_id),
        format!("/api/session-exercises/{}", tree.session_exercise_id),
        format!("/api/sets/{}", tree.set_id),
    ] {
        let response = TestRequest::get(&path).bearer(&token).send(&app.router).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn set_numbers_continue_after_the_highest() {
    let app = test_app();
    let (token, workout_id) = signed_up(&app.router, "lifter@example.com").await;
    let tree = build_tree(&app.router, &token, &workout_id).await;
    let sets_path = format!("/api/session-exercises/{}/sets", tree.session_exercise_id);

    let second = TestRequest::post(&sets_path)
        .bearer(&token)
        .json(&json!({ "weight": "102.5", "reps": 5 }))
        .send(&app.router)
        .await;
    assert_eq!(second.data()["set_number"], 2);

    TestRequest::delete(&format!("/api/sets/{}", tree.set_id))
        .bearer(&token)
        .send(&app.router)
        .await;

    let third = TestRequest::post(&sets_path)
        .bearer(&token)
        .json(&json!({ "weight": "105", "reps": 3, "warm_up": false }))
        .send(&app.router)
        .await;
    assert_eq!(third.data()["set_number"], 3);

    let listed = TestRequest::get(&sets_path).bearer(&token).send(&app.router).await;
    let numbers: Vec<i64> = listed
        .data()
        .as_array()
        .unwrap()
        .iter()
        .map(|set| set["set_number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, [2, 3]);
}

#[tokio::test]
async fn updates_keep_the_parent() {
    let app = test_app();
    let (token, workout_id) = signed_up(&app.router, "lifter@example.com").await;
    let tree = build_tree(&app.router, &token, &workout_id).await;

    let updated = TestRequest::put(&format!("/api/sets/{}", tree.set_id))
        .bearer(&token)
        .json(&json!({ "reps": 8, "warm_up": true }))
        .send(&app.router)
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.data()["reps"], 8);
    assert_eq!(updated.data()["warm_up"], true);
    assert_eq!(updated.data()["set_number"], 1);
    assert_eq!(
        updated.data()["session_exercise_id"],
        tree.session_exercise_id.as_str()
    );
}

#[tokio::test]
async fn unknown_exercise_cannot_be_added() {
    let app = test_app();
    let (token, workout_id) = signed_up(&app.router, "lifter@example.com").await;
    let tree = build_tree(&app.router, &token, &workout_id).await;

    let response = TestRequest::post(&format!("/api/sessions/{}/exercises", tree.session_id))
        .bearer(&token)
        .json(&json!({ "exercise_id": uuid::Uuid::new_v4() }))
        .send(&app.router)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_exercises_are_private() {
    let app = test_app();
    let (alice, _) = signed_up(&app.router, "alice@example.com").await;
    let (bob, _) = signed_up(&app.router, "bob@example.com").await;

    let created = TestRequest::post("/api/exercises")
        .bearer(&alice)
        .json(&json!({ "name": "Zercher Squat" }))
        .send(&app.router)
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.data()["is_custom"], true);
    let path = format!("/api/exercises/{}", created.id("exercise_id"));

    let as_bob = TestRequest::get(&path).bearer(&bob).send(&app.router).await;
    assert_eq!(as_bob.status, StatusCode::NOT_FOUND);

    let bench = TestRequest::get(&format!("/api/exercises/{BENCH_PRESS}"))
        .bearer(&bob)
        .send(&app.router)
        .await;
    assert_eq!(bench.status, StatusCode::OK);
    assert_eq!(bench.data()["is_custom"], false);
}

#[tokio::test]
async fn invalid_bodies_are_rejected_without_a_domain_error() {
    let app = test_app();
    let (token, _) = signed_up(&app.router, "lifter@example.com").await;

    let malformed = TestRequest::post("/api/workouts")
        .bearer(&token)
        .raw_json("{\"name\":")
        .send(&app.router)
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert!(malformed.error().is_null());

    let empty_name = TestRequest::post("/api/workouts")
        .bearer(&token)
        .json(&json!({ "name": "" }))
        .send(&app.router)
        .await;
    assert_eq!(empty_name.status, StatusCode::BAD_REQUEST);
    assert!(empty_name.error().is_null());
    assert!(!empty_name.json()["details"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_routes_and_health() {
    let app = test_app();

    let health = TestRequest::get("/health").send(&app.router).await;
    assert_eq!(health.status, StatusCode::OK);

    let unknown = TestRequest::get("/api/nothing-here").send(&app.router).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(unknown.error(), "NotFound");
}
