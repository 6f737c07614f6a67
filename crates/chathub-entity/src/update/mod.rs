//! Outbound update stream entities.

pub mod model;

pub use model::Update;
