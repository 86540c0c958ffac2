//! API layer - native client
pub mod native;
