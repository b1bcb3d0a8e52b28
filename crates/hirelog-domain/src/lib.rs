//! Domain types shared across the Hirelog workspace.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod resume;
pub mod user;
