#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod cleaner;
pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod models;
pub mod server;
pub mod upstream;
pub mod validator;

pub use cleaner::{clean_output, wrap_single_root};
pub use client::{BlueprintClient, ClientError};
pub use config::{ApiKey, GatewayConfig};
pub use error::GatewayError;
pub use gateway::Gateway;
pub use models::{BLUEPRINT_INSTRUCTION, BlueprintResponse, GenerateContentRequest, PromptRequest};
pub use server::{router, serve};
pub use upstream::{GenerativeUpstream, ReqwestUpstream, UpstreamReply};
pub use validator::{BlueprintError, validate_blueprint};
