pub mod json_extract;
pub mod markdown;
pub mod webhook_client;
