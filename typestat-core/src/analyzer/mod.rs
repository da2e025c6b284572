//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Lower-cases text and blanks out punctuation
//! - **Tokenizer**: Splits text into pieces on a fixed separator

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{TextNormalizer, PUNCTUATION};
pub use tokenizer::Tokenizer;
