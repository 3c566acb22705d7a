use crate::registro::credential;
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize)]
pub struct UserLogin {
    username: String,
    password: String,
}

impl std::fmt::Debug for UserLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLogin")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[utoipa::path(
    post,
    path= "/login",
    request_body = UserLogin,
    responses (
        (status = 200, description = "Login successful", body = String),
        (status = 400, description = "Missing payload", body = String),
        (status = 401, description = "Unauthorized", body = String),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument]
pub async fn login(pool: Extension<PgPool>, payload: Option<Json<UserLogin>>) -> impl IntoResponse {
    let user: UserLogin = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()),
    };

    debug!("user: {:?}", user);

    // get the stored credential for the username; unknown users and wrong
    // passwords are indistinguishable to the caller
    let stored = match get_password(&pool, &user.username).await {
        Ok(stored) => stored,

        Err(sqlx::Error::RowNotFound) => {
            debug!("User not found");

            return (StatusCode::UNAUTHORIZED, String::from("Unauthorized"));
        }

        Err(e) => {
            error!("Error getting password from database: {:?}", e);

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                String::from("Error getting password"),
            );
        }
    };

    // compare the provided password against the stored credential
    match credential::verify(&stored, &user.password) {
        Ok(true) => {
            debug!("Login successful");

            (StatusCode::OK, String::from("Login successful"))
        }

        Ok(false) => {
            debug!("Unauthorized");

            (StatusCode::UNAUTHORIZED, String::from("Unauthorized"))
        }

        Err(e) => {
            error!("Error verifying password: {:?}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                String::from("Error verifying password"),
            )
        }
    }
}

async fn get_password(pool: &PgPool, username: &str) -> Result<String, sqlx::Error> {
    match sqlx::query("SELECT password FROM users WHERE username = $1")
        .bind(username)
        .fetch_one(pool)
        .await
    {
        Ok(row) => Ok(row.get(0)),
        Err(e) => Err(e),
    }
}
