//! # Paceline
//!
//! A single-line statusline for interactive coding-assistant sessions:
//! context and token budget consumption, the recurring usage-window
//! countdown, and project/git identification.
//!
//! ## Overview
//!
//! Each invocation reads one JSON session snapshot from stdin and writes
//! one composed line to stdout:
//! - Context budget estimated from the transcript byte length
//! - Token budget estimated from recent file activity, with a linear
//!   time fallback
//! - Countdown to the current window's renewal (or to the next opening)
//! - Project name, type tag, branch, and dirty marker
//!
//! The render never fails: missing input, a hung git call, or an
//! unreadable directory degrade to defaults and the line still prints.
//!
//! ## Features
//!
//! - `git` (default): repository inspection via the git CLI
//! - `colors` (default): terminal color output via owo-colors

/// Recent-file-activity scanning for the token estimator
pub mod activity;

/// Token and context budget estimation
pub mod budget;

/// Command-line argument parsing and configuration
pub mod cli;

/// Status component building and line composition
pub mod display;

/// Git repository inspection (feature-gated)
#[cfg(feature = "git")]
pub mod git;

/// Data models for the stdin snapshot and Git info
pub mod models;

/// Project-type classification by marker files
pub mod project;

/// Severity tiers and their decoration
pub mod severity;

/// Utility functions for stdin, paths, and time
pub mod utils;

/// Usage-window location and countdown arithmetic
pub mod window;
