#![forbid(unsafe_code)]

//! Install strategies and their fallback chains.
//!
//! A strategy is a named, idempotent operation that makes one concrete
//! theme active. Strategies are registered once at startup into a keyword →
//! strategy map; each keyword family carries an ordered fallback chain that
//! terminates in the baseline theme, which has no preconditions.

use std::sync::Arc;

use ahash::AHashMap;
use tint_color::Rgb;
use tracing::{debug, warn};

use crate::engine::{BASELINE_DARK, BASELINE_LIGHT, FlatPreset, ThemeEngine};
use crate::error::EngineError;
use crate::overrides::{OverrideValue, SessionOverrides, VARIANT_ACCENT, VARIANT_TINT};

/// Mutable state handed to a strategy for one install attempt.
pub struct InstallCtx<'a> {
    pub engine: &'a mut dyn ThemeEngine,
    pub overrides: &'a mut SessionOverrides,
    /// Verbose variant-resolution logging; never affects install outcomes.
    pub diagnostics: bool,
}

/// A named, idempotent theme activation.
pub trait InstallStrategy {
    fn name(&self) -> &'static str;

    /// Attempt to make this strategy's theme active. Errors are absorbed by
    /// the caller's fallback walk, never propagated past it.
    fn install(&self, ctx: &mut InstallCtx<'_>) -> Result<(), EngineError>;
}

/// Activates a built-in engine by name.
struct NamedEngineStrategy {
    keyword: &'static str,
    engine_name: &'static str,
}

impl InstallStrategy for NamedEngineStrategy {
    fn name(&self) -> &'static str {
        self.keyword
    }

    fn install(&self, ctx: &mut InstallCtx<'_>) -> Result<(), EngineError> {
        ctx.engine.install_named(self.engine_name)
    }
}

/// Installs a flat preset on the generic flat engine.
struct FlatPresetStrategy {
    preset: &'static FlatPreset,
}

impl InstallStrategy for FlatPresetStrategy {
    fn name(&self) -> &'static str {
        self.preset.name
    }

    fn install(&self, ctx: &mut InstallCtx<'_>) -> Result<(), EngineError> {
        ctx.engine.install_flat(self.preset)
    }
}

/// A color variant of a base engine family.
#[derive(Debug, Clone, Copy)]
pub struct VariantSpec {
    pub keyword: &'static str,
    /// Engine the variant layers on.
    pub base_engine: &'static str,
    pub tint: Rgb,
    pub accent: Rgb,
}

/// Two-phase apply for variant-family themes.
///
/// Installing the base engine resets the defaults a variant depends on, so
/// the ordered effect list is: apply overrides, install base, re-apply
/// overrides, verify. Each step is idempotent.
struct VariantStrategy {
    spec: VariantSpec,
}

impl VariantStrategy {
    fn apply_overrides(&self, overrides: &mut SessionOverrides) {
        overrides.set(VARIANT_TINT, OverrideValue::Color(self.spec.tint));
        overrides.set(VARIANT_ACCENT, OverrideValue::Color(self.spec.accent));
    }
}

impl InstallStrategy for VariantStrategy {
    fn name(&self) -> &'static str {
        self.spec.keyword
    }

    fn install(&self, ctx: &mut InstallCtx<'_>) -> Result<(), EngineError> {
        if ctx.diagnostics {
            debug!(
                keyword = self.spec.keyword,
                base = self.spec.base_engine,
                tint = %self.spec.tint,
                accent = %self.spec.accent,
                "resolving variant overrides"
            );
        }
        self.apply_overrides(ctx.overrides);
        ctx.engine.install_named(self.spec.base_engine)?;
        // Base install may have reset defaults the variant depends on.
        self.apply_overrides(ctx.overrides);

        match ctx.engine.active_engine() {
            Some(active) if active == self.spec.base_engine => {
                if ctx.diagnostics {
                    debug!(keyword = self.spec.keyword, "variant base engine verified");
                }
            }
            active => {
                // Detectable inconsistency, log-only.
                warn!(
                    keyword = self.spec.keyword,
                    expected = self.spec.base_engine,
                    ?active,
                    "active engine does not match variant base after install"
                );
            }
        }
        Ok(())
    }
}

const AURORA_VARIANTS: [VariantSpec; 3] = [
    VariantSpec {
        keyword: "aurora",
        base_engine: "aurora",
        tint: Rgb::new(46, 52, 64),
        accent: Rgb::new(136, 192, 208),
    },
    VariantSpec {
        keyword: "aurora-dusk",
        base_engine: "aurora",
        tint: Rgb::new(59, 47, 66),
        accent: Rgb::new(208, 145, 180),
    },
    VariantSpec {
        keyword: "aurora-slate",
        base_engine: "aurora",
        tint: Rgb::new(47, 53, 58),
        accent: Rgb::new(140, 170, 160),
    },
];

/// Build the startup strategy registry. Built once, read-only afterwards.
pub(crate) fn built_in_strategies() -> AHashMap<String, Arc<dyn InstallStrategy>> {
    let mut registry: AHashMap<String, Arc<dyn InstallStrategy>> = AHashMap::new();
    let mut add = |strategy: Arc<dyn InstallStrategy>| {
        registry.insert(strategy.name().to_string(), strategy);
    };

    add(Arc::new(FlatPresetStrategy {
        preset: &BASELINE_DARK,
    }));
    add(Arc::new(FlatPresetStrategy {
        preset: &BASELINE_LIGHT,
    }));
    add(Arc::new(NamedEngineStrategy {
        keyword: "system-native",
        engine_name: "system-native",
    }));
    add(Arc::new(NamedEngineStrategy {
        keyword: "legacy-metal",
        engine_name: "legacy-metal",
    }));
    add(Arc::new(NamedEngineStrategy {
        keyword: "legacy-motif",
        engine_name: "legacy-motif",
    }));
    for spec in AURORA_VARIANTS {
        add(Arc::new(VariantStrategy { spec }));
    }
    registry
}

/// Static fallback chains per keyword family; every chain ends in the
/// baseline strategy.
pub(crate) fn built_in_chains() -> AHashMap<&'static str, &'static [&'static str]> {
    let mut chains: AHashMap<&'static str, &'static [&'static str]> = AHashMap::new();
    chains.insert("system-native", &["baseline-dark"]);
    chains.insert("legacy-metal", &["baseline-dark"]);
    chains.insert("legacy-motif", &["system-native", "baseline-dark"]);
    chains.insert("aurora", &["baseline-dark"]);
    chains.insert("aurora-dusk", &["aurora", "baseline-dark"]);
    chains.insert("aurora-slate", &["aurora", "baseline-dark"]);
    chains
}
