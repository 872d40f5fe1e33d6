//! Core library components.
//!
//! Configuration, the authorized keys registry, cipher backends and the
//! workspace operations built on them.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod fs;
pub mod identity;
pub mod registry;
pub mod workspace;
