//! Network providers, signer selection and connection management

pub mod providers;
pub mod retry;
pub mod signer;

pub use providers::*;
pub use retry::*;
pub use signer::*;
