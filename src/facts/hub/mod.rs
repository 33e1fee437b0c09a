//! Data provider backed by the Hugging Face Hub and the GitHub REST API

mod api;
mod client;
mod provider;

pub use provider::Provider;
