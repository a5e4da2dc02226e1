//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and pose composition
//! - Logging utilities

pub mod logging;
pub mod math;
