//! Core types for `textgrid`.
//!
//! This crate provides the shared building blocks for the `textgrid` table
//! renderer:
//!
//! - [`format`]: cell alignment and the per-table display format holder
//! - [`error`]: error types for the wrapping and layout crates
//!
//! # Examples
//!
//! ```
//! use textgrid_core::format::{Alignment, TableFormat};
//!
//! let format = TableFormat::new().with_alignment(Alignment::Right);
//! assert_eq!(format.alignment, Alignment::Right);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod format;

// Re-export commonly used types at the crate root for convenience
pub use error::{WrapError, WrapResult};
pub use format::{Alignment, TableFormat};
