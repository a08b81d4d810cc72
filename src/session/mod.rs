/// Session persistence backends
pub mod store;

pub use store::*;
