//! Contract artifacts and ABI bindings

pub mod artifacts;
pub mod bindings;

pub use artifacts::*;
pub use bindings::*;
