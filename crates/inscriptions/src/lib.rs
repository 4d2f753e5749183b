//! Client library for the remote inscriptions index.
//!
//! Provides the paginated address fetch with retry and exponential backoff,
//! a TTL disk cache for fetched inscription lists, normalization of raw API
//! records, and pass-through retrieval of inscription content.

pub mod api;
pub mod cache;
pub mod config;
pub mod records;
pub mod retry;
