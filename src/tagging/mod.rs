pub mod commands;
pub mod logger;
pub mod scoring;
pub mod stats;
pub mod table;
pub mod timestamp;

pub use logger::{FormView, PlayLogger};
pub use scoring::resolve_points;
pub use timestamp::resolve_timestamp;
