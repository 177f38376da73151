use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct BankAccount {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
    pub opening_balance: f64,
    pub opening_balance_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub enum Error {
    UnexpectedError,
}

pub struct CreateBankAccountPayload {
    pub name: String,
    pub account_number: String,
    pub bank_name: String,
    pub opening_balance: f64,
    pub opening_balance_date: Option<NaiveDateTime>,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateBankAccountPayload,
) -> Result<BankAccount, Error> {
    sqlx::query_as::<_, BankAccount>(
        "
        INSERT INTO bank_accounts (id, name, account_number, bank_name, opening_balance, opening_balance_date)
        VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()))
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.account_number)
    .bind(payload.bank_name)
    .bind(payload.opening_balance)
    .bind(payload.opening_balance_date)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a bank account: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_account_number<'e, E: PgExecutor<'e>>(
    e: E,
    account_number: String,
) -> Result<Option<BankAccount>, Error> {
    sqlx::query_as::<_, BankAccount>("SELECT * FROM bank_accounts WHERE account_number = $1")
        .bind(account_number.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch a bank account by account_number {}: {}",
                account_number,
                err
            );
            Error::UnexpectedError
        })
}

#[derive(Deserialize)]
struct DatabaseCountedResult {
    data: Vec<BankAccount>,
    total: u32,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
) -> Result<Paginated<BankAccount>, Error> {
    let result = sqlx::query_scalar::<_, serde_json::Value>(
        "
        WITH filtered_data AS (
            SELECT *
            FROM bank_accounts
            ORDER BY created_at
            LIMIT $1
            OFFSET $2
        ),
        total_count AS (
            SELECT COUNT(id) AS total_rows
            FROM bank_accounts
        )
        SELECT JSONB_BUILD_OBJECT(
            'data', COALESCE(JSONB_AGG(ROW_TO_JSON(filtered_data)), '[]'::jsonb),
            'total', (SELECT total_rows FROM total_count)
        ) AS result
        FROM filtered_data;
        ",
    )
    .bind(pagination.per_page as i64)
    .bind(((pagination.page - 1) * pagination.per_page) as i64)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many bank accounts: {}", err);
        Error::UnexpectedError
    })?;

    let counted =
        serde_json::from_value::<DatabaseCountedResult>(result).map_err(|err| {
            tracing::error!("Error occurred while trying to decode counted bank accounts: {}", err);
            Error::UnexpectedError
        })?;

    Ok(Paginated::new(
        counted.data,
        counted.total,
        pagination.page,
        pagination.per_page,
    ))
}
