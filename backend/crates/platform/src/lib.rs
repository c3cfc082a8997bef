//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, secure randomness)
//! - Password hashing (Argon2id with a configurable work factor)
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
