use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use tracing::debug;

use crate::{
    annotate::annotate_file,
    catalog::CatalogEntry,
    compile::{compile_target, ensure_toolchain},
    config::PipelineConfig,
    error::ShadergenResult,
    expand::expand_catalog,
};

/// Counts reported by a successful [`run_generate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    /// Catalog entries processed.
    pub entries: usize,
    /// Build targets compiled and annotated after variant expansion.
    pub targets: usize,
}

/// Delete `path` recursively if it exists, then recreate it empty.
///
/// Runs exactly once per generation run, before the first target builds, so
/// no stale artifact from a previous run survives — even when the new run
/// fails partway through.
pub fn reset_dir(path: &Path) -> ShadergenResult<()> {
    if path.exists() {
        debug!(path = %path.display(), "cleaning output directory");
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to delete '{}'", path.display()))?;
    }
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;
    Ok(())
}

/// Owner of the shared intermediate SPIR-V path.
///
/// Every target in a run overwrites the same file; the guard removes it when
/// the run ends, on success and on every failure path. Because the path is
/// shared, targets must never compile concurrently against it.
pub struct IntermediateGuard(PathBuf);

impl IntermediateGuard {
    /// Place the intermediate under the system temp directory with a
    /// run-unique name.
    pub fn for_run() -> Self {
        Self(std::env::temp_dir().join(format!(
            "shadergen_{}_{}.spv",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0)
        )))
    }

    /// Use an explicit path instead of the temp-dir default.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for IntermediateGuard {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

/// Regenerate every artifact declared by `catalog`.
///
/// Resets the output tree once, expands the catalog into the flat ordered
/// target list, then compiles and annotates each target in order. The first
/// failure aborts the remaining targets and propagates; the shared
/// intermediate artifact is removed on every exit path by the guard.
#[tracing::instrument(skip_all)]
pub fn run_generate(
    cfg: &PipelineConfig,
    catalog: &[CatalogEntry],
) -> ShadergenResult<GenerateStats> {
    cfg.validate()?;
    reset_dir(&cfg.generated_dir)?;

    let targets = expand_catalog(cfg, catalog)?;
    debug!(entries = catalog.len(), targets = targets.len(), "catalog expanded");

    if !targets.is_empty() {
        ensure_toolchain(cfg)?;
    }

    let intermediate = match &cfg.intermediate_path {
        Some(path) => IntermediateGuard::at(path),
        None => IntermediateGuard::for_run(),
    };

    for target in &targets {
        let output = compile_target(cfg, target, intermediate.path())?;
        annotate_file(&output)?;
        debug!(output = %output.display(), "generated");
    }

    Ok(GenerateStats {
        entries: catalog.len(),
        targets: targets.len(),
    })
}
