use serde::{Deserialize, Serialize};
use secrecy::SecretString;

use crate::models::user::{deserialize_secret_string, serialize_secret_string};

#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(serialize_with = "serialize_secret_string", deserialize_with = "deserialize_secret_string")]
    pub password: SecretString,
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
