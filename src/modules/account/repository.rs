use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use std::str::FromStr;
use ulid::Ulid;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountType {
    #[serde(rename = "Sales")]
    Sales,
    #[serde(rename = "Cost of Sales")]
    CostOfSales,
    #[serde(rename = "Expenses")]
    Expenses,
    #[serde(rename = "Income Tax")]
    IncomeTax,
    #[serde(rename = "Non-Current Assets")]
    NonCurrentAssets,
    #[serde(rename = "Current Assets")]
    CurrentAssets,
    #[serde(rename = "Current Liabilities")]
    CurrentLiabilities,
    #[serde(rename = "Non-Current Liabilities")]
    NonCurrentLiabilities,
    #[serde(rename = "Owner's Equity")]
    OwnersEquity,
    #[serde(rename = "Other Incomes")]
    Others,
}

impl AccountType {
    pub fn all() -> [AccountType; 10] {
        [
            AccountType::Sales,
            AccountType::CostOfSales,
            AccountType::Expenses,
            AccountType::IncomeTax,
            AccountType::NonCurrentAssets,
            AccountType::CurrentAssets,
            AccountType::CurrentLiabilities,
            AccountType::NonCurrentLiabilities,
            AccountType::OwnersEquity,
            AccountType::Others,
        ]
    }
}

impl ToString for AccountType {
    fn to_string(&self) -> String {
        match *self {
            AccountType::Sales => String::from("Sales"),
            AccountType::CostOfSales => String::from("Cost of Sales"),
            AccountType::Expenses => String::from("Expenses"),
            AccountType::IncomeTax => String::from("Income Tax"),
            AccountType::NonCurrentAssets => String::from("Non-Current Assets"),
            AccountType::CurrentAssets => String::from("Current Assets"),
            AccountType::CurrentLiabilities => String::from("Current Liabilities"),
            AccountType::NonCurrentLiabilities => String::from("Non-Current Liabilities"),
            AccountType::OwnersEquity => String::from("Owner's Equity"),
            AccountType::Others => String::from("Other Incomes"),
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sales" => Ok(AccountType::Sales),
            "Cost of Sales" => Ok(AccountType::CostOfSales),
            "Expenses" => Ok(AccountType::Expenses),
            "Income Tax" => Ok(AccountType::IncomeTax),
            "Non-Current Assets" => Ok(AccountType::NonCurrentAssets),
            "Current Assets" => Ok(AccountType::CurrentAssets),
            "Current Liabilities" => Ok(AccountType::CurrentLiabilities),
            "Non-Current Liabilities" => Ok(AccountType::NonCurrentLiabilities),
            "Owner's Equity" => Ok(AccountType::OwnersEquity),
            "Other Incomes" => Ok(AccountType::Others),
            _ => Err(format!("'{}' is not a valid AccountType", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: String,
    pub balance: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub enum Error {
    UnexpectedError,
}

pub struct CreateAccountPayload {
    pub name: String,
    pub account_type: AccountType,
    pub balance: f64,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateAccountPayload,
) -> Result<Account, Error> {
    sqlx::query_as::<_, Account>(
        "
        INSERT INTO accounts (id, name, account_type, balance)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.account_type.to_string())
    .bind(payload.balance)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an account: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Account>, Error> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
        .bind(id.clone())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch an account by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_name_and_type<'e, E: PgExecutor<'e>>(
    e: E,
    name: String,
    account_type: AccountType,
) -> Result<Option<Account>, Error> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE name = $1 AND account_type = $2")
        .bind(name.clone())
        .bind(account_type.to_string())
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch an account by name {}: {}",
                name,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_all<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Account>, Error> {
    sqlx::query_as::<_, Account>("SELECT * FROM accounts ORDER BY created_at")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch all accounts: {}", err);
            Error::UnexpectedError
        })
}

#[cfg(test)]
mod tests {
    use super::AccountType;
    use std::str::FromStr;

    #[test]
    fn account_type_round_trips_through_display_strings() {
        for account_type in AccountType::all() {
            let parsed = AccountType::from_str(account_type.to_string().as_str()).unwrap();
            assert_eq!(parsed, account_type);
        }
    }

    #[test]
    fn unknown_account_type_is_rejected() {
        assert!(AccountType::from_str("Petty Cash").is_err());
    }

    #[test]
    fn account_type_serializes_as_display_string() {
        let serialized = serde_json::to_value(AccountType::OwnersEquity).unwrap();
        assert_eq!(serialized, serde_json::json!("Owner's Equity"));
    }
}
