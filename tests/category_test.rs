use chrono::Utc;
use reqwest::Client;
use serde_json::json;

mod common;
use common::utils::{create_test_user_and_login, create_workout, spawn_app};

#[tokio::test]
async fn test_default_categories_are_seeded() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let user = create_test_user_and_login(&test_app.address).await;

    let response = client
        .get(&format!("{}/categories", &test_app.address))
        .header("Authorization", format!("Bearer {}", user.token))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body = response.json::<serde_json::Value>().await.unwrap();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|category| category["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Strength Training"));
    assert!(names.contains(&"Cardiovascular Training"));
}

#[tokio::test]
async fn test_create_update_and_delete_category() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let user = create_test_user_and_login(&test_app.address).await;

    let response = client
        .post(&format!("{}/categories", &test_app.address))
        .header("Authorization", format!("Bearer {}", user.token))
        .json(&json!({ "name": "Mobility", "met_value": 3.0 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body = response.json::<serde_json::Value>().await.unwrap();
    let category_id = body["data"]["id"].as_str().unwrap().to_string();

    let response = client
        .put(&format!("{}/categories/{}", &test_app.address, category_id))
        .header("Authorization", format!("Bearer {}", user.token))
        .json(&json!({ "met_value": 3.5 }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert_eq!(body["data"]["met_value"], 3.5);
    assert_eq!(body["data"]["name"], "Mobility");

    let response = client
        .delete(&format!("{}/categories/{}", &test_app.address, category_id))
        .header("Authorization", format!("Bearer {}", user.token))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let response = client
        .get(&format!("{}/categories/{}", &test_app.address, category_id))
        .header("Authorization", format!("Bearer {}", user.token))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_duplicate_category_name_is_rejected() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let user = create_test_user_and_login(&test_app.address).await;

    let response = client
        .post(&format!("{}/categories", &test_app.address))
        .header("Authorization", format!("Bearer {}", user.token))
        .json(&json!({ "name": "Strength Training", "met_value": 6.0 }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_deleting_category_preserves_workouts() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let user = create_test_user_and_login(&test_app.address).await;

    // A disposable category referenced by a workout
    let response = client
        .post(&format!("{}/categories", &test_app.address))
        .header("Authorization", format!("Bearer {}", user.token))
        .json(&json!({ "name": "Plyometrics", "met_value": 8.0 }))
        .send()
        .await
        .expect("Failed to execute request.");
    let body = response.json::<serde_json::Value>().await.unwrap();
    let category_id = body["data"]["id"].as_str().unwrap().to_string();

    let workout_id = create_workout(
        &test_app.address,
        &user.token,
        json!({
            "exercise_name": "Box Jumps",
            "workout_duration_minutes": 20,
            "date": Utc::now().date_naive().to_string(),
            "category_id": category_id
        }),
    )
    .await;

    let response = client
        .delete(&format!("{}/categories/{}", &test_app.address, category_id))
        .header("Authorization", format!("Bearer {}", user.token))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    // The workout survives with its category reference nulled
    let response = client
        .get(&format!("{}/workouts/{}", &test_app.address, workout_id))
        .header("Authorization", format!("Bearer {}", user.token))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body = response.json::<serde_json::Value>().await.unwrap();
    assert!(body["data"]["category_id"].is_null());
    assert!(body["data"]["category_name"].is_null());
}
