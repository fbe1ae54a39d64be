// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Translation catalogs embedded in the binary
//! - Bilingual rendering of a message in every catalog locale (used for
//!   load errors shown in the lightbox)

pub mod fluent;

pub use fluent::I18n;
