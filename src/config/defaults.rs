// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Cache warm-up batch size
//! - **Lightbox**: Overlay transition and error display delays

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of leading gallery items preloaded before the rest.
pub const DEFAULT_VISIBLE_PREFIX: usize = 5;

/// Maximum accepted visible prefix.
pub const MAX_VISIBLE_PREFIX: usize = 100;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Delay between dismissing an overlay and removing it (in milliseconds).
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 300;

/// Maximum close delay (in milliseconds).
pub const MAX_CLOSE_DELAY_MS: u64 = 2_000;

/// How long a load error stays visible before the overlay removes itself
/// (in milliseconds).
pub const DEFAULT_ERROR_DISPLAY_MS: u64 = 2_000;

/// Minimum error display time (in milliseconds).
pub const MIN_ERROR_DISPLAY_MS: u64 = 500;

/// Maximum error display time (in milliseconds).
pub const MAX_ERROR_DISPLAY_MS: u64 = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_VISIBLE_PREFIX > 0);
    assert!(DEFAULT_VISIBLE_PREFIX <= MAX_VISIBLE_PREFIX);

    assert!(DEFAULT_CLOSE_DELAY_MS <= MAX_CLOSE_DELAY_MS);

    assert!(MIN_ERROR_DISPLAY_MS > 0);
    assert!(MAX_ERROR_DISPLAY_MS >= MIN_ERROR_DISPLAY_MS);
    assert!(DEFAULT_ERROR_DISPLAY_MS >= MIN_ERROR_DISPLAY_MS);
    assert!(DEFAULT_ERROR_DISPLAY_MS <= MAX_ERROR_DISPLAY_MS);
};
