//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Collected-file model (CollectedFile, FileBody) and scan records
//! - Bundle block format and listing renderers
//! - Path normalization utilities
//! - Common utilities
//! - File reading
//! - Token counting for LLM context budgeting

pub mod model;
pub mod paths;
pub mod reader;
pub mod render;
pub mod tokens;
pub mod util;
