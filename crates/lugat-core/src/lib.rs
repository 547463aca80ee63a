//! Core types for the lugat Ottoman-Turkish root lexicon.
//!
//! This crate holds everything that does not depend on an index or a
//! transport: the visenc transliteration codec, the Latin phonology
//! helpers, and the root record model built on top of both.
//!
//! # Architecture
//!
//! - [`visenc`] -- Token tables, longest-match tokenizer, abjad values,
//!   visenc/Unicode conversions, search-key stripping
//! - [`phonology`] -- Regex classification of Turkish Latin orthography
//!   (vowel harmony, hard consonants)
//! - [`root`] -- `OttomanWord`, `Root`, `RootSet` and their constructors

pub mod phonology;
pub mod root;
pub mod visenc;

pub use root::{OttomanWord, PartOfSpeech, Root, RootError, RootSet};
