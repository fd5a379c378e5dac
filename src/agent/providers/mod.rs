//! Concrete completion provider implementations.

pub mod litellm;

pub use litellm::LiteLlmProvider;
