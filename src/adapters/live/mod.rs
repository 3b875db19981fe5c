//! Live adapters for real external interactions.

pub mod filesystem;
pub mod publish;
pub mod repo;
pub mod suggest;
