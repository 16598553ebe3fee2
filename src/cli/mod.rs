//! CLI infrastructure for the gamelog report tool
//!
//! This module provides the command-line interface for generating the
//! diagnostic report from one game results log.

pub mod output;
pub mod run;
