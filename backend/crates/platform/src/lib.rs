//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, random keys)
//! - Bearer token extraction from HTTP headers
//! - HS256 signed token verification

pub mod bearer;
pub mod crypto;
pub mod jwt;
