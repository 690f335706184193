//! Configuration module for the dashboard application.

// Can all be private now because we have a public re-export.
mod bucket;
mod debug;
mod persistence;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use bucket::{BUCKET, BucketConfig};
pub use debug::DF;
pub use persistence::PERSISTENCE;
