pub mod auth;
pub mod blogs;
mod client;
pub mod comments;
pub mod tags;
pub mod types;

pub use client::{ApiClient, ApiError};
