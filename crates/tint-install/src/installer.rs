#![forbid(unsafe_code)]

//! The look-and-feel installation pipeline.
//!
//! `install` never errors outward except for one case: the guaranteed
//! baseline theme itself failed to install. Every other failure — a missing
//! native engine, a bogus qualified reference, an absent pack entry — is
//! absorbed, logged, and recovered by walking a fallback chain that ends in
//! the baseline. The caller always ends up with *some* active theme.
//!
//! Apply requests are idempotent and last-writer-wins; callers serialize
//! them on the UI thread. The strategy registry and fallback chains are
//! built once at construction and never mutated.

use std::sync::Arc;

use ahash::AHashMap;
use tint_color::ensure_contrast;
use tint_resolve::{DEFAULT_KEYWORD, ThemeToken, is_likely_flat_target, normalize};
use tracing::{debug, info, warn};

use crate::engine::{BASELINE_DARK, ThemeEngine, flat_preset};
use crate::error::{EngineError, FatalThemeError};
use crate::overrides::{ACCENT_FOCUS, ACCENT_LINK, OverrideValue, SessionOverrides};
use crate::pack::ThemePackProvider;
use crate::strategy::{InstallCtx, InstallStrategy, built_in_chains, built_in_strategies};

/// Minimum contrast required of focus/link accents after a pack install.
///
/// Deliberately low: this path only needs to avoid totally illegible
/// accents, not full text contrast. Preserved as-is for behavior parity.
pub const ACCENT_REPAIR_MIN_RATIO: f64 = 1.25;

/// Env flag enabling verbose variant-resolution logging.
///
/// Defaults to disabled; affects log verbosity only, never install
/// outcomes.
pub const DIAGNOSTICS_ENV: &str = "TINT_THEME_DEBUG";

/// Which pipeline path produced the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPath {
    /// Direct instantiation of a fully qualified reference.
    Qualified,
    /// An entry from the external theme pack.
    Pack,
    /// A registered keyword strategy (primary or fallback).
    Strategy,
    /// A pre-baked flat preset for a keyword with no strategy.
    Preset,
    /// The unconditional baseline install.
    Baseline,
}

/// What an apply-request ended up doing.
#[derive(Debug)]
pub struct InstallReport {
    /// The normalized request.
    pub requested: ThemeToken,
    /// Keyword or target that is now active.
    pub installed: String,
    pub path: InstallPath,
    /// Whether the request degraded past its first choice.
    pub fell_back: bool,
    /// Override keys whose colors were adjusted by contrast repair.
    pub repaired_accents: Vec<String>,
}

/// Orchestrates theme activation across the engine, pack, and overrides.
pub struct LookAndFeelInstaller {
    engine: Box<dyn ThemeEngine>,
    pack: Box<dyn ThemePackProvider>,
    /// Pack capability, probed once at construction.
    pack_available: bool,
    strategies: AHashMap<String, Arc<dyn InstallStrategy>>,
    chains: AHashMap<&'static str, &'static [&'static str]>,
    overrides: SessionOverrides,
    diagnostics: bool,
}

impl LookAndFeelInstaller {
    /// Wire the installer to its collaborators, reading the diagnostics
    /// toggle from the environment.
    pub fn new(engine: Box<dyn ThemeEngine>, pack: Box<dyn ThemePackProvider>) -> Self {
        let diagnostics = env_truthy(DIAGNOSTICS_ENV);
        Self::with_diagnostics(engine, pack, diagnostics)
    }

    /// Like [`LookAndFeelInstaller::new`] with an explicit diagnostics flag.
    pub fn with_diagnostics(
        engine: Box<dyn ThemeEngine>,
        pack: Box<dyn ThemePackProvider>,
        diagnostics: bool,
    ) -> Self {
        let pack_available = pack.is_available();
        Self {
            engine,
            pack,
            pack_available,
            strategies: built_in_strategies(),
            chains: built_in_chains(),
            overrides: SessionOverrides::new(),
            diagnostics,
        }
    }

    /// Current session overrides.
    pub fn overrides(&self) -> &SessionOverrides {
        &self.overrides
    }

    /// Set one session override (e.g. a user-chosen accent color).
    pub fn set_override(&mut self, key: impl Into<String>, value: OverrideValue) {
        self.overrides.set(key, value);
    }

    /// Apply the theme named by `raw`.
    ///
    /// Only a failed baseline install escapes; everything else degrades to
    /// the baseline theme and reports what happened.
    pub fn install(&mut self, raw: &str) -> Result<InstallReport, FatalThemeError> {
        let requested = normalize(raw);
        match &requested {
            ThemeToken::Qualified(target) => {
                let target = target.clone();
                match self.engine.install_qualified(&target) {
                    Ok(()) => {
                        info!(%target, "qualified look-and-feel installed");
                        return Ok(self.finish(requested, target, InstallPath::Qualified, false));
                    }
                    Err(err) => warn!(
                        %target,
                        error = %err,
                        "qualified reference failed; degrading to keyword resolution"
                    ),
                }
                // A malformed qualified reference still gets a sensible
                // default rather than an error.
                let keyword = raw.trim().to_ascii_lowercase();
                self.install_keyword(requested, &keyword, true)
            }
            ThemeToken::Pack(reference) => {
                let reference = reference.clone();
                let entry = requested.pack_entry().unwrap_or_default().to_string();
                if self.pack_available && self.pack.install(&entry) {
                    info!(entry, "theme pack entry installed");
                    return Ok(self.finish(requested, reference, InstallPath::Pack, false));
                }
                warn!(
                    entry,
                    pack_available = self.pack_available,
                    "theme pack entry unavailable; degrading to keyword resolution"
                );
                let keyword = raw.trim().to_ascii_lowercase();
                self.install_keyword(requested, &keyword, true)
            }
            ThemeToken::Keyword(keyword) => {
                let keyword = keyword.clone();
                self.install_keyword(requested, &keyword, false)
            }
        }
    }

    fn install_keyword(
        &mut self,
        requested: ThemeToken,
        keyword: &str,
        fell_back: bool,
    ) -> Result<InstallReport, FatalThemeError> {
        if let Some(strategy) = self.strategies.get(keyword).cloned() {
            match self.run_strategy(&strategy) {
                Ok(()) => {
                    return Ok(self.finish(
                        requested,
                        keyword.to_string(),
                        InstallPath::Strategy,
                        fell_back,
                    ));
                }
                Err(err) => {
                    if keyword == DEFAULT_KEYWORD {
                        // The baseline strategy has no preconditions; its
                        // failure is a fatal configuration error.
                        return Err(FatalThemeError::BaselineFailed(err));
                    }
                    warn!(keyword, error = %err, "install strategy failed; walking fallback chain");
                }
            }
            return self.walk_fallback_chain(requested, keyword);
        }

        if let Some(preset) = flat_preset(keyword) {
            match self.engine.install_flat(preset) {
                Ok(()) => {
                    return Ok(self.finish(
                        requested,
                        keyword.to_string(),
                        InstallPath::Preset,
                        fell_back,
                    ));
                }
                Err(err) => {
                    warn!(keyword, error = %err, "flat preset install failed; installing baseline")
                }
            }
            self.install_baseline()?;
            return Ok(self.finish(
                requested,
                DEFAULT_KEYWORD.to_string(),
                InstallPath::Baseline,
                true,
            ));
        }

        debug!(keyword, "no strategy or preset for keyword; installing baseline");
        self.install_baseline()?;
        Ok(self.finish(
            requested,
            DEFAULT_KEYWORD.to_string(),
            InstallPath::Baseline,
            true,
        ))
    }

    fn walk_fallback_chain(
        &mut self,
        requested: ThemeToken,
        keyword: &str,
    ) -> Result<InstallReport, FatalThemeError> {
        let chain: &[&str] = self.chains.get(keyword).copied().unwrap_or(&[DEFAULT_KEYWORD]);
        for name in chain {
            let Some(fallback) = self.strategies.get(*name).cloned() else {
                warn!(name, "fallback strategy not registered; skipping");
                continue;
            };
            match self.run_strategy(&fallback) {
                Ok(()) => {
                    info!(keyword, fallback = name, "fallback strategy succeeded");
                    return Ok(self.finish(
                        requested,
                        (*name).to_string(),
                        InstallPath::Strategy,
                        true,
                    ));
                }
                Err(err) if *name == DEFAULT_KEYWORD => {
                    return Err(FatalThemeError::BaselineFailed(err));
                }
                Err(err) => warn!(fallback = name, error = %err, "fallback strategy failed"),
            }
        }
        // Defensive: built-in chains always end in the baseline, but a
        // custom chain might not.
        self.install_baseline()?;
        Ok(self.finish(
            requested,
            DEFAULT_KEYWORD.to_string(),
            InstallPath::Baseline,
            true,
        ))
    }

    fn run_strategy(&mut self, strategy: &Arc<dyn InstallStrategy>) -> Result<(), EngineError> {
        let mut ctx = InstallCtx {
            engine: self.engine.as_mut(),
            overrides: &mut self.overrides,
            diagnostics: self.diagnostics,
        };
        strategy.install(&mut ctx)
    }

    fn install_baseline(&mut self) -> Result<(), FatalThemeError> {
        self.engine
            .install_flat(&BASELINE_DARK)
            .map_err(FatalThemeError::BaselineFailed)
    }

    /// Unconditional post-install side effects.
    fn finish(
        &mut self,
        requested: ThemeToken,
        installed: String,
        path: InstallPath,
        fell_back: bool,
    ) -> InstallReport {
        let effective = normalize(&installed);
        if !is_likely_flat_target(&effective) {
            // A legacy theme must never inherit stale accent tinting.
            self.overrides.clear_accent_colors();
        }
        let repaired_accents = if path == InstallPath::Pack {
            self.repair_accents()
        } else {
            Vec::new()
        };
        InstallReport {
            requested,
            installed,
            path,
            fell_back,
            repaired_accents,
        }
    }

    /// Contrast-repair pass for the focus/link accents after a pack
    /// install, against the now-active panel background.
    fn repair_accents(&mut self) -> Vec<String> {
        let background = self
            .pack
            .panel_background()
            .or_else(|| self.engine.panel_background());
        let Some(background) = background else {
            debug!("no panel background reported; skipping accent contrast repair");
            return Vec::new();
        };

        let mut repaired = Vec::new();
        for key in [ACCENT_FOCUS, ACCENT_LINK] {
            let Some(accent) = self.overrides.color(key) else {
                continue;
            };
            let fixed = ensure_contrast(accent, background, ACCENT_REPAIR_MIN_RATIO);
            if fixed != accent {
                info!(key, from = %accent, to = %fixed, "repaired accent contrast");
                self.overrides.set(key, OverrideValue::Color(fixed));
                repaired.push(key.to_string());
            }
        }
        repaired
    }
}

fn env_truthy(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false"))
}
