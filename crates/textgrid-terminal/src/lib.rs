//! Terminal and environment probing for `textgrid`.
//!
//! Everything here answers one question for the renderer: how wide is the
//! output, and is it a terminal that can take color? The answers are
//! collected once into a [`RenderConfig`] value that the caller passes
//! around explicitly; nothing is cached process-wide.

#![warn(missing_docs)]

pub mod capabilities;
pub mod env;

pub use capabilities::{is_terminal, output_width, supports_color, OutputStream, RenderConfig};
pub use env::get_env;
