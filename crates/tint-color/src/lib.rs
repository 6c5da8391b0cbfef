#![forbid(unsafe_code)]

//! Perceptual color math for the tint theme system.
//!
//! # Role in tint
//! `tint-color` is the shared vocabulary for opaque RGB colors and the
//! accessibility math built on top of them. The installer uses it to repair
//! illegible accent colors after a theme switch; settings snapshots use it
//! to carry user-chosen accents; downstream chat renderers use it to derive
//! timestamp and mention styles that stay readable on any background.
//!
//! # This crate provides
//! - [`Rgb`] with lenient hex parsing and canonical formatting.
//! - Relative luminance and WCAG-style contrast ratios.
//! - [`ensure_contrast`], a bounded search for the nearest color meeting a
//!   contrast threshold (best effort, never fails).
//!
//! Everything here is pure and reentrant: no shared state, safe to call
//! from any thread.

/// WCAG-style luminance and contrast utilities.
pub mod contrast;
/// The opaque RGB color type with hex parsing and mixing.
pub mod rgb;

pub use contrast::{
    CHAT_TEXT_MIN_RATIO, CONTRAST_SEARCH_STEPS, DARK_LUMINANCE_THRESHOLD, TEXT_SPLIT_LUMINANCE,
    best_text_color, contrast_ratio, contrast_ratio_opt, correct_readability, ensure_contrast,
    is_dark, relative_luminance, relative_luminance_opt,
};
pub use rgb::{Rgb, mix_opt};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_reexports_resolve() {
        let c = Rgb::new(10, 20, 30);
        assert!(is_dark(c));
        assert_eq!(best_text_color(c), Rgb::WHITE);
    }
}
