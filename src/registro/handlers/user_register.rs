use crate::registro::{credential, handlers::valid_email};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize)]
pub struct UserRegister {
    username: String,
    email: String,
    password: String,
}

impl std::fmt::Debug for UserRegister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRegister")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[utoipa::path(
    post,
    path= "/register",
    request_body = UserRegister,
    responses (
        (status = 201, description = "Registration successful", body = String),
        (status = 400, description = "Missing or invalid payload", body = String),
        (status = 409, description = "User with the specified username already exists", body = String),
        (status = 500, description = "Registration failed", body = String),
    ),
    tag= "register"
)]
// axum handler for register
#[instrument]
pub async fn register(
    pool: Extension<PgPool>,
    payload: Option<Json<UserRegister>>,
) -> impl IntoResponse {
    let user: UserRegister = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()),
    };

    debug!("user: {:?}", user);

    if user.username.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, "Invalid username".to_string());
    }

    if !valid_email(&user.email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string());
    }

    if user.password.is_empty() {
        return (StatusCode::BAD_REQUEST, "Invalid password".to_string());
    }

    // check if user exists
    match user_exists(&pool, &user.username).await {
        Ok(true) => {
            error!("User already exists");
            return (StatusCode::CONFLICT, "User already exists".to_string());
        }
        Ok(false) => (),
        Err(e) => {
            error!("Error checking if user exists: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error checking if user exists".to_string(),
            );
        }
    }

    // derive the stored credential from the password
    let password = match credential::hash(&user.password) {
        Ok(password) => password,
        Err(e) => {
            error!("Error hashing password: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error hashing password".to_string(),
            );
        }
    };

    // insert user into database
    match sqlx::query("INSERT INTO users (username, email, password) VALUES ($1, $2, $3)")
        .bind(&user.username)
        .bind(&user.email)
        .bind(&password)
        .execute(&*pool)
        .await
    {
        Ok(_) => (StatusCode::CREATED, "User created".to_string()),
        Err(e) => {
            error!("Error inserting user: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error inserting user".to_string(),
            )
        }
    }
}

async fn user_exists(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
    match sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1) AS exists")
        .bind(username)
        .fetch_one(pool)
        .await
    {
        Ok(row) => Ok(row.get("exists")),
        Err(e) => Err(e),
    }
}
