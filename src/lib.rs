//! binder-config: generate a BinderHub `config.yaml` from a template.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{GenerateOutcome, generate, generate_at};
pub use domain::{AppError, GenerateOptions, HubAddress, OutputTarget};
