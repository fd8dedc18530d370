use secrecy::ExposeSecret;
use serde_json::json;
use sqlx::{PgPool, PgConnection, Connection, Executor};
use std::net::TcpListener;
use uuid::Uuid;
use once_cell::sync::Lazy;
use reqwest::Client;

use fitlog_backend::run;
use fitlog_backend::config::settings::{get_config, DatabaseSettings, get_jwt_settings};
use fitlog_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp{
    pub address: String,
    pub db_pool: PgPool
}

pub struct TestUser {
    pub username: String,
    pub email: String,
    pub token: String,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    let mut configuration = get_config().expect("Failed to read configuration.");
    configuration.database.db_name = Uuid::new_v4().to_string();
    let connection_pool = configure_db(&configuration.database)
        .await;
    let jwt_settings = get_jwt_settings(&configuration);
    let server = run(
        listener,
        connection_pool.clone(),
        jwt_settings,
    )
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);
    TestApp {
        address,
        db_pool: connection_pool
    }
}

pub async fn configure_db(config: &DatabaseSettings) -> PgPool {
    // Create database
    let mut connection = PgConnection::connect(
            &config.connection_string_without_db()
        )
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.db_name).as_str())
        .await
        .expect("Failed to create database.");

    // Migrate database
    let connection_pool = PgPool::connect(&config.connection_string().expose_secret())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}

/// Register a fresh user (no profile attributes) and log in.
pub async fn create_test_user_and_login(app_address: &str) -> TestUser {
    register_and_login(app_address, json!({})).await
}

/// Register a fresh user with extra profile fields merged into the
/// registration payload, then log in.
pub async fn register_and_login(app_address: &str, extra_fields: serde_json::Value) -> TestUser {
    let client = Client::new();
    let username = format!("testuser{}", Uuid::new_v4());
    let password = "password123";
    let email = format!("{}@example.com", username);

    let mut user_request = json!({
        "username": username,
        "password": password,
        "email": email
    });
    if let (Some(base), Some(extra)) = (user_request.as_object_mut(), extra_fields.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }

    let register_response = client
        .post(&format!("{}/register_user", app_address))
        .json(&user_request)
        .send()
        .await
        .expect("Failed to register user.");
    assert!(register_response.status().is_success());

    let login_request = json!({
        "email": email,
        "password": password
    });

    let login_response = client
        .post(&format!("{}/login", app_address))
        .json(&login_request)
        .send()
        .await
        .expect("Failed to execute login request.");

    let login_response: serde_json::Value = login_response.json().await.expect("Failed to parse login response");
    let token = login_response["token"].as_str().expect("No token in response");

    TestUser {
        username,
        email,
        token: token.to_string(),
    }
}

/// Look up a seeded category id by name through the API.
pub async fn category_id_by_name(app_address: &str, token: &str, name: &str) -> String {
    let client = Client::new();
    let response = client
        .get(&format!("{}/categories", app_address))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to list categories.");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse categories");
    body["data"]
        .as_array()
        .expect("No category list")
        .iter()
        .find(|category| category["name"] == name)
        .and_then(|category| category["id"].as_str())
        .unwrap_or_else(|| panic!("Category {} not found", name))
        .to_string()
}

/// Create a workout through the API and return its id.
pub async fn create_workout(
    app_address: &str,
    token: &str,
    payload: serde_json::Value,
) -> String {
    let client = Client::new();
    let response = client
        .post(&format!("{}/workouts", app_address))
        .header("Authorization", format!("Bearer {}", token))
        .json(&payload)
        .send()
        .await
        .expect("Failed to create workout.");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse workout");
    body["data"]["id"].as_str().expect("No workout id").to_string()
}
