use super::{account, bank};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/banks", bank::routes::get_router())
        .nest("/accounts", account::routes::get_router())
}
