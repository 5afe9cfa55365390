//! # I/O Module
//!
//! Reading word lists and exporting finished layouts.
//!
//! - [`traits`] - The [`traits::WordListFile`] interface shared by every word-list format
//! - [`word_list`] - Plain-text and JSON word-list readers
//! - [`layout`] - Serializable snapshot of a finished grid and its placements

pub mod layout;
pub mod traits;
pub mod word_list;
