pub mod app;
pub mod client;
pub mod modules;
pub mod types;
pub mod utils;

pub use client::ApiClient;
pub use types::Context;
