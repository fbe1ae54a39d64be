// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks.
//!
//! - [`gallery`] - Thumbnail grid
//! - [`overlay`] - Lightbox overlay rendering
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod gallery;
pub mod overlay;
pub mod styles;
pub mod widgets;
