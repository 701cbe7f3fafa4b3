//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory,
//! sales and auth crates (no IO, no console concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;

pub use entity::Entity;
pub use error::DomainError;
pub use id::ProductId;
pub use money::Money;
