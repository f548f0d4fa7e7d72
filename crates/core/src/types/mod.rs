//! Core types for Fantasy Products.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod wallet;

pub use id::*;
pub use wallet::{WalletAddress, WalletAddressError};
