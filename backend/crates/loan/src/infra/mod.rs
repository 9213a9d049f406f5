//! Infrastructure Layer
//!
//! Implementations of the domain ports.

pub mod auth_service;
pub mod memory;
pub mod postgres;
