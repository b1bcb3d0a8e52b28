//! Test utilities for Hirelog services.
//!
//! Provides token-minting and auth-header helpers. Import in test targets
//! only — never in production code.

pub mod auth;
