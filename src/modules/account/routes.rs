use super::repository::{self, AccountType};
use crate::{types::Context, utils};
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use hyper::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::borrow::Cow;
use std::str::FromStr;
use std::sync::Arc;
use validator::{Validate, ValidationError};

async fn get_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to the accounts API!" })),
    )
}

fn validate_account_type(account_type: &str) -> Result<(), ValidationError> {
    match AccountType::from_str(account_type) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("INVALID_ACCOUNT_TYPE")
            .with_message(Cow::from("Invalid account type"))),
    }
}

#[derive(Deserialize, Validate)]
struct CreateAccountPayload {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    name: String,
    #[validate(custom(function = "validate_account_type"))]
    account_type: String,
    #[serde(default)]
    balance: f64,
}

async fn create_account(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<CreateAccountPayload>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return utils::validation::into_response(errors);
    }

    let account_type = match AccountType::from_str(payload.account_type.as_str()) {
        Ok(account_type) => account_type,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid account type" })),
            )
        }
    };

    match repository::find_by_name_and_type(&ctx.db_conn.pool, payload.name.clone(), account_type)
        .await
    {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Account already exists!" })),
            )
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to create account" })),
            )
        }
        Ok(None) => (),
    };

    match repository::create(
        &ctx.db_conn.pool,
        repository::CreateAccountPayload {
            name: payload.name,
            account_type,
            balance: payload.balance,
        },
    )
    .await
    {
        Ok(account) => (
            StatusCode::OK,
            Json(json!({
                "message": "Account created successfully!",
                "data": account,
            })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to create account" })),
        ),
    }
}

async fn get_all_accounts(State(ctx): State<Arc<Context>>) -> impl IntoResponse {
    match repository::find_all(&ctx.db_conn.pool).await {
        Ok(accounts) => (StatusCode::OK, Json(json!({ "accounts": accounts }))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch accounts" })),
        ),
    }
}

async fn get_all_account_types() -> impl IntoResponse {
    let account_types = AccountType::all()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    (
        StatusCode::OK,
        Json(json!({ "account_types": account_types })),
    )
}

#[derive(Deserialize)]
struct GetAccountFilters {
    account_id: Option<String>,
}

async fn get_account_by_id(
    State(ctx): State<Arc<Context>>,
    Query(filters): Query<GetAccountFilters>,
) -> impl IntoResponse {
    let account_id = match filters.account_id {
        Some(account_id) => account_id,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Account ID is required!" })),
            )
        }
    };

    match repository::find_by_id(&ctx.db_conn.pool, account_id).await {
        Ok(Some(account)) => (StatusCode::OK, Json(json!({ "account": account }))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Account not found!" })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch account" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(get_index))
        .route("/create", post(create_account))
        .route("/all", get(get_all_accounts))
        .route("/types", get(get_all_account_types))
        .route("/get_account", get(get_account_by_id))
}
