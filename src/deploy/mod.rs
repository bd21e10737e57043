//! Contract deployment

pub mod deployer;
pub mod pipeline;

pub use deployer::*;
pub use pipeline::*;
