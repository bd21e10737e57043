//! Error types for the deployer

pub mod deploy_error;

pub use deploy_error::*;
