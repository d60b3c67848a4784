//! Playfair digraph substitution cipher.
//!
//! Builds a 5×5 letter square (a Polybius square) from a keyword and
//! transforms text two letters at a time. This crate provides:
//! - Square construction with a validated letter-fold policy.
//! - Message segmentation into digrams with filler insertion.
//! - Encryption, decryption and re-keying over the square.
//!
//! The cipher is a classical construction with no cryptographic strength;
//! the implementation aims for clarity and testability.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod digram;
mod error;
mod grid;

pub use crate::cipher::Playfair;
pub use crate::digram::{Digram, FILLER, FILLER_ALT};
pub use crate::error::PlayfairError;
pub use crate::grid::{Fold, Grid};
