use super::repository;
use crate::{
    types::Context,
    utils::{self, pagination::Pagination},
};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDateTime;
use hyper::StatusCode;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

async fn get_index() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to the banks API!" })),
    )
}

#[derive(Deserialize, Validate)]
struct CreateBankAccountPayload {
    #[validate(length(min = 1, message = "name cannot be empty"))]
    name: String,
    #[validate(length(min = 1, message = "account_number cannot be empty"))]
    account_number: String,
    #[validate(length(min = 1, message = "bank_name cannot be empty"))]
    bank_name: String,
    #[serde(default)]
    opening_balance: f64,
    opening_balance_date: Option<NaiveDateTime>,
}

async fn create_bank_account(
    State(ctx): State<Arc<Context>>,
    Json(payload): Json<CreateBankAccountPayload>,
) -> impl IntoResponse {
    if let Err(errors) = payload.validate() {
        return utils::validation::into_response(errors);
    }

    match repository::find_by_account_number(&ctx.db_conn.pool, payload.account_number.clone())
        .await
    {
        Ok(Some(_)) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Bank account already exists!" })),
            )
        }
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to create bank account" })),
            )
        }
        Ok(None) => (),
    };

    match repository::create(
        &ctx.db_conn.pool,
        repository::CreateBankAccountPayload {
            name: payload.name,
            account_number: payload.account_number,
            bank_name: payload.bank_name,
            opening_balance: payload.opening_balance,
            opening_balance_date: payload.opening_balance_date,
        },
    )
    .await
    {
        Ok(bank_account) => (
            StatusCode::OK,
            Json(json!({
                "message": "Bank account created successfully!",
                "data": bank_account,
            })),
        ),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to create bank account" })),
        ),
    }
}

async fn get_bank_accounts(
    State(ctx): State<Arc<Context>>,
    pagination: Pagination,
) -> impl IntoResponse {
    match repository::find_many(&ctx.db_conn.pool, pagination).await {
        Ok(bank_accounts) => (StatusCode::OK, Json(json!(bank_accounts))),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to fetch bank accounts" })),
        ),
    }
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(get_index))
        .route("/create", post(create_bank_account))
        .route("/all", get(get_bank_accounts))
}
