#![forbid(unsafe_code)]

//! Relative luminance, contrast ratios, and contrast-seeking search.
//!
//! Luminance follows the standard sRGB piecewise gamma curve; the contrast
//! ratio is the WCAG-style `(lighter + 0.05) / (darker + 0.05)` in `[1, 21]`.
//!
//! The thresholds below are empirically tuned for theme work rather than
//! re-derived from the literature; behavior parity is the goal.

use crate::rgb::Rgb;

/// Number of graduated steps [`ensure_contrast`] tries toward white/black.
pub const CONTRAST_SEARCH_STEPS: u32 = 12;

/// Luminance below which a color is classified as dark.
///
/// Tuned for perceived light/dark classification of saturated accent colors;
/// deliberately lower than the literature's usual 0.5.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 0.45;

/// Luminance split used by [`best_text_color`] to pick black or white text.
pub const TEXT_SPLIT_LUMINANCE: f64 = 0.55;

/// Default minimum ratio for chat text readability repair.
pub const CHAT_TEXT_MIN_RATIO: f64 = 4.5;

/// Relative luminance of a color per the sRGB gamma-corrected formula.
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Luminance of an optional color; absent counts as 0.0.
pub fn relative_luminance_opt(color: Option<Rgb>) -> f64 {
    color.map_or(0.0, relative_luminance)
}

/// WCAG-style contrast ratio between two colors, in `[1, 21]`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio tolerating absent inputs.
///
/// An absent color on either side yields a neutral 1.0 so callers checking
/// "is this pair too low-contrast?" never get a false negative from missing
/// data.
pub fn contrast_ratio_opt(a: Option<Rgb>, b: Option<Rgb>) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => contrast_ratio(a, b),
        _ => 1.0,
    }
}

/// Whether a color is perceptually dark.
pub fn is_dark(color: Rgb) -> bool {
    relative_luminance(color) < DARK_LUMINANCE_THRESHOLD
}

/// Pick black or white text for the given background.
pub fn best_text_color(bg: Rgb) -> Rgb {
    if relative_luminance(bg) > TEXT_SPLIT_LUMINANCE {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Nudge `fg` toward white or black until it meets `min_ratio` against `bg`.
///
/// Returns `fg` unchanged when it already meets the threshold. Otherwise
/// tries [`CONTRAST_SEARCH_STEPS`] graduated steps `t = i/steps`, mixing `fg`
/// toward both white and black; the first step at which either candidate
/// reaches the threshold wins (the higher-ratio candidate on a tie). If the
/// threshold is unreachable, the best candidate seen is returned — a
/// best-effort legible color beats an error.
pub fn ensure_contrast(fg: Rgb, bg: Rgb, min_ratio: f64) -> Rgb {
    let mut best = fg;
    let mut best_ratio = contrast_ratio(fg, bg);
    if best_ratio >= min_ratio {
        return fg;
    }

    for step in 1..=CONTRAST_SEARCH_STEPS {
        let t = f64::from(step) / f64::from(CONTRAST_SEARCH_STEPS);
        let toward_white = fg.mix(Rgb::WHITE, t);
        let toward_black = fg.mix(Rgb::BLACK, t);
        let white_ratio = contrast_ratio(toward_white, bg);
        let black_ratio = contrast_ratio(toward_black, bg);

        let (candidate, ratio) = if white_ratio >= black_ratio {
            (toward_white, white_ratio)
        } else {
            (toward_black, black_ratio)
        };
        if ratio >= min_ratio {
            return candidate;
        }
        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }
    }
    best
}

/// Repair a chat foreground against its background at the default text ratio.
pub fn correct_readability(fg: Rgb, bg: Rgb) -> Rgb {
    ensure_contrast(fg, bg, CHAT_TEXT_MIN_RATIO)
}

fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}
