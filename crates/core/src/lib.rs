//! Domain building blocks for Ordinal Frame.
//!
//! Holds the pieces every other crate shares: Bitcoin address shape
//! validation, the normalized [`inscription::Inscription`] record, and the
//! small file/hash utilities used for persisted state.

pub mod address;
pub mod error;
pub mod fs;
pub mod hashing;
pub mod inscription;
pub mod lenient;
