//! Infrastructure layer - storage implementations
pub mod storage;
