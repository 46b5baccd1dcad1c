//! Terminal output.
//!
//! - [`render`] / [`render_with`] - pure formatting of a [`Report`](crate::verifier::Report)
//! - [`icons`] - one glyph per probe status
//! - [`theme`] - colours, and whether to use them

pub mod icons;
pub mod render;
pub mod theme;

pub use render::{render, render_with, RenderOptions};
pub use theme::{should_use_colors, Theme};
