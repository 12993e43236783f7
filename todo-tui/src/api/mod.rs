mod client;
mod dto;

pub use client::{get_json, ApiClient, ApiError, ApiResult};
