//! HTTP API exposing the Lookbook generation pipeline.

mod api;
mod config;
mod request;
mod response;

pub use api::{ApiState, create_router};
pub use config::{ServerConfig, ServerConfigBuilder};
pub use request::HistoryQuery;
pub use response::{
    BatchResponse, ErrorResponse, GenerateResponse, HistoryResponse, LoraGenerateResponse,
    ProvidersResponse,
};
