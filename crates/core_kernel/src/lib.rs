//! Core Kernel - Foundational types shared by the registry of persons
//!
//! This crate provides the building blocks used by the domain crates:
//! - Strongly-typed entity identifiers
//! - Registry configuration loaded from the environment
//! - The common error type

pub mod identifiers;
pub mod config;
pub mod error;

pub use identifiers::PersonId;
pub use crate::config::RegistryConfig;
pub use error::CoreError;
