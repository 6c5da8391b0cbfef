#![forbid(unsafe_code)]

//! Capability-detection interface for the optional external theme pack.
//!
//! The pack collaborator ships a catalog of installable themes we know
//! nothing about. Instead of probing for its presence at every call site,
//! the installer asks [`ThemePackProvider::is_available`] once, caches the
//! answer, and consults the pack only through [`ThemePackProvider::install`].
//! When no pack is wired in, [`NoopThemePack`] stands in.

use tint_color::Rgb;

/// The external theme-pack collaborator, behind a capability interface.
pub trait ThemePackProvider {
    /// Whether the pack is present. The installer calls this once at
    /// construction and caches the result.
    fn is_available(&self) -> bool;

    /// Install the named pack entry. Returns `false` when the entry does
    /// not exist or activation failed; the installer degrades to keyword
    /// resolution in that case.
    fn install(&mut self, name: &str) -> bool;

    /// Panel background the pack produced, if it reports one.
    fn panel_background(&self) -> Option<Rgb>;
}

/// Stub used when no theme pack is integrated.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopThemePack;

impl ThemePackProvider for NoopThemePack {
    fn is_available(&self) -> bool {
        false
    }

    fn install(&mut self, _name: &str) -> bool {
        false
    }

    fn panel_background(&self) -> Option<Rgb> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_pack_reports_unavailable() {
        let mut pack = NoopThemePack;
        assert!(!pack.is_available());
        assert!(!pack.install("Anything"));
        assert_eq!(pack.panel_background(), None);
    }
}
