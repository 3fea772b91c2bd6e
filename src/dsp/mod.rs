//! Core analysis pipeline: forward transform, band filtering, reconstruction.
//!
//! ```text
//!   samples + frequency axis
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ spectrum  │  forward DFT → magnitude / phase / complex bins
//!   └───────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │   band    │  drop every bin above the cutoff frequency
//!   └───────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │ reconstruct │  polar → rectangular, inverse DFT → real signal
//!   └─────────────┘
//! ```
//!
//! All three stages are pure: they borrow their inputs, allocate fresh
//! outputs, and fail fast on contract violations.

pub mod band;
pub mod reconstruct;
pub mod spectrum;

use thiserror::Error;

/// Contract violations raised by the pipeline stages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DspError {
    /// Two sequences that must be co-indexed have different lengths.
    #[error("co-indexed sequences disagree in length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}
