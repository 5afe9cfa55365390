//! # Workflows Module
//!
//! High-level entry points that run a complete layout generation.
//!
//! ## Overview
//!
//! A workflow validates the configuration, prepares the word list, seeds the random
//! generator once for the whole run, and drives the engine through one or more attempts,
//! reporting progress as it goes. Callers that only need a finished layout should start
//! here rather than with [`crate::engine`].
//!
//! - **Generation Workflow** ([`generate`]) - Shuffled, repeated placement attempts with
//!   best-result selection
pub mod generate;
