#![forbid(unsafe_code)]

//! Theme token normalization and classification.
//!
//! # Role in tint
//! User- and config-supplied theme names arrive as free-form strings. This
//! crate classifies each raw token into one of three installable shapes so
//! the installer can pick a strategy without re-parsing:
//!
//! - **Keyword** — a built-in theme id, ASCII-lowercased (`"DARCULA"` and
//!   `"darcula"` name the same theme).
//! - **Qualified** — a fully qualified implementation name
//!   (`com.example.MyTheme`); case preserved because qualified references
//!   must match exactly.
//! - **Pack** — an entry in an external theme-pack collaborator
//!   (`pack:SomeTheme`); the suffix is a case-sensitive type name.
//!
//! Unknown keywords are deliberately passed through: degrading them to the
//! baseline theme is the installer's job, not the resolver's.
//!
//! Everything here is pure string rules; no dependencies, no shared state.

/// The keyword blank or empty input resolves to.
pub const DEFAULT_KEYWORD: &str = "baseline-dark";

/// Prefix marking a namespaced theme-pack reference.
pub const PACK_PREFIX: &str = "pack:";

/// Marker substring identifying flat-style qualified references.
const FLAT_MARKER: &str = "Flat";

/// Reverse-domain prefixes recognized by the qualified-reference heuristic.
const REVERSE_DOMAIN_PREFIXES: [&str; 5] = ["com.", "org.", "net.", "io.", "dev."];

/// Keywords naming legacy / native / variant-family themes that are not part
/// of the flat family. Everything else is assumed flat.
const NON_FLAT_KEYWORDS: [&str; 6] = [
    "system-native",
    "legacy-metal",
    "legacy-motif",
    "aurora",
    "aurora-dusk",
    "aurora-slate",
];

/// A normalized theme token.
///
/// Created once per apply-request from raw input, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThemeToken {
    /// A built-in theme id, ASCII-lowercased. Not guaranteed to exist in the
    /// known keyword set.
    Keyword(String),
    /// A fully qualified implementation name, case preserved.
    Qualified(String),
    /// A theme-pack reference including its prefix, suffix case preserved.
    Pack(String),
}

impl ThemeToken {
    /// The token's string form.
    pub fn as_str(&self) -> &str {
        match self {
            ThemeToken::Keyword(s) | ThemeToken::Qualified(s) | ThemeToken::Pack(s) => s,
        }
    }

    /// The pack entry name with the prefix stripped, for pack tokens only.
    pub fn pack_entry(&self) -> Option<&str> {
        match self {
            ThemeToken::Pack(s) => s.get(PACK_PREFIX.len()..),
            _ => None,
        }
    }
}

/// Normalize a raw theme token.
///
/// Trims the input; blank input resolves to [`DEFAULT_KEYWORD`]. A
/// recognized pack prefix (matched case-insensitively, preserved verbatim)
/// wins over the qualified heuristic, which in turn wins over keyword
/// folding.
pub fn normalize(raw: &str) -> ThemeToken {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ThemeToken::Keyword(DEFAULT_KEYWORD.to_string());
    }
    if has_pack_prefix(trimmed) {
        return ThemeToken::Pack(trimmed.to_string());
    }
    if looks_qualified(trimmed) {
        return ThemeToken::Qualified(trimmed.to_string());
    }
    ThemeToken::Keyword(trimmed.to_ascii_lowercase())
}

/// Whether two raw tokens name the same theme.
pub fn same_theme(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Whether a token likely targets a flat-family theme.
///
/// Pack entries are always flat; qualified references are flat when they
/// carry the flat marker; keywords are flat unless they sit on the fixed
/// non-flat denylist. Callers use this to decide whether flat-only visual
/// tweaks (accent tinting, mention highlights) apply.
pub fn is_likely_flat_target(token: &ThemeToken) -> bool {
    match token {
        ThemeToken::Pack(_) => true,
        ThemeToken::Qualified(name) => name.contains(FLAT_MARKER),
        ThemeToken::Keyword(keyword) => !NON_FLAT_KEYWORDS.contains(&keyword.as_str()),
    }
}

fn has_pack_prefix(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() > PACK_PREFIX.len()
        && bytes[..PACK_PREFIX.len()].eq_ignore_ascii_case(PACK_PREFIX.as_bytes())
}

/// Heuristic for fully qualified implementation names: contains a dot AND
/// (starts with a known reverse-domain prefix OR the final segment starts
/// with an uppercase letter).
fn looks_qualified(s: &str) -> bool {
    if !s.contains('.') {
        return false;
    }
    if REVERSE_DOMAIN_PREFIXES
        .iter()
        .any(|prefix| s.starts_with(prefix))
    {
        return true;
    }
    s.rsplit('.')
        .next()
        .and_then(|segment| segment.chars().next())
        .is_some_and(char::is_uppercase)
}
