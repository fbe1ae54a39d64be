// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a media gallery with a lightbox viewer built with the
//! Iced GUI framework.
//!
//! The gallery warms a session-lifetime preload cache for its items, visible
//! items first. Clicking an item opens a full-window overlay that shows the
//! item once loaded, closes on Escape or a backdrop click, and browses the
//! gallery with the arrow keys.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod lightbox;
pub mod media;
pub mod ui;
