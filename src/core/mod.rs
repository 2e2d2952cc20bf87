//! Core processing modules
//!
//! Text normalization applied to transcripts before numeric parsing.

pub mod text_normalizer;
