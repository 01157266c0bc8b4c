//! # Vassago Core
//!
//! Core traits, types, and errors for the Vassago decompression library.
//!
//! Vassago is named after the third spirit of the Ars Goetia, who declares
//! things past and discovers all things hidden or lost - just as
//! decompression recovers the original data hidden inside its denser
//! encoded form.
//!
//! ## Design Philosophy
//!
//! - **Pure functions of their inputs**: no process-wide state, no I/O
//! - **Explicit failure**: every malformed input maps to a named error kind
//! - **Bounds-checked**: the decoder never indexes past its buffers
//!
//! ## Core Traits
//!
//! - [`Decompressor`] - One-shot decompression operations
//! - [`DictionaryDecompressor`] - Decompression with a preset dictionary

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{Decompressor, DictionaryDecompressor};
pub use types::{Algorithm, WindowSize};
