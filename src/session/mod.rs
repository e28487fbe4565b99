pub mod commands;
pub mod registry;

pub use registry::SessionRegistry;
