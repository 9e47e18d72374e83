use std::path::PathBuf;

use crate::{
    catalog::CatalogEntry,
    config::PipelineConfig,
    error::{ShadergenError, ShadergenResult},
    stage::StageProfile,
};

/// Animated variants are compiled with this extra define.
pub const ANIMATION_DEFINE: &str = "HAS_ANIMATION=1";

/// One concrete compile job after variant expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildTarget {
    pub input_path: PathBuf,
    pub profile: StageProfile,
    /// Extra preprocessor defines on top of the config's base defines.
    pub defines: Vec<String>,
    pub output_path: PathBuf,
}

/// Expand one catalog entry into its build targets.
///
/// Plain entries yield a single target. Animated entries yield the plain
/// target followed by the animated variant, so the plain artifact is always
/// built (and annotated) before its derivative.
pub fn expand_entry(
    cfg: &PipelineConfig,
    entry: &CatalogEntry,
) -> ShadergenResult<Vec<BuildTarget>> {
    let profile = StageProfile::for_stem(&entry.stem)?;
    let input_path = cfg.source_dir.join(format!("{}.hlsl", entry.stem));

    let plain = BuildTarget {
        input_path: input_path.clone(),
        profile,
        defines: Vec::new(),
        output_path: cfg.generated_dir.join(format!("{}.glsl", entry.stem)),
    };
    if !entry.animated {
        return Ok(vec![plain]);
    }

    if !profile.is_vertex() {
        return Err(ShadergenError::config(format!(
            "'{}' is not a vertex shader",
            input_path.display()
        )));
    }
    let animated = BuildTarget {
        input_path,
        profile,
        defines: vec![ANIMATION_DEFINE.to_string()],
        output_path: cfg
            .generated_dir
            .join(format!("animated_{}.glsl", entry.stem)),
    };
    Ok(vec![plain, animated])
}

/// Expand the whole catalog, in order, into the flat target list.
///
/// Fails on the first bad entry, so every configuration error surfaces
/// before any external process runs.
pub fn expand_catalog(
    cfg: &PipelineConfig,
    catalog: &[CatalogEntry],
) -> ShadergenResult<Vec<BuildTarget>> {
    let mut targets = Vec::with_capacity(catalog.len());
    for entry in catalog {
        targets.extend(expand_entry(cfg, entry)?);
    }
    Ok(targets)
}
