//! Core data types and structures

pub mod contracts;
pub mod deployment;

pub use contracts::*;
pub use deployment::*;
