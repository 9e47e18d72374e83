use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use serde::Deserialize;

use crate::{catalog::CatalogEntry, config::PipelineConfig, error::ShadergenResult};

/// Optional JSON document overriding the built-in pipeline defaults.
///
/// Every field is optional; absent fields keep their [`PipelineConfig`]
/// defaults. Relative paths are resolved against the project root.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub compiler: Option<PathBuf>,
    pub cross_compiler: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub include_dir: Option<PathBuf>,
    pub generated_dir: Option<PathBuf>,
    pub base_defines: Option<Vec<String>>,
    pub feature_level: Option<String>,
    pub intermediate_path: Option<PathBuf>,
    pub tool_timeout_secs: Option<u64>,
    /// Replacement build catalog. Absent keeps the built-in one.
    pub shaders: Option<Vec<CatalogEntry>>,
}

impl Manifest {
    pub fn from_path(path: &Path) -> ShadergenResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open manifest '{}'", path.display()))?;
        let r = BufReader::new(f);
        let manifest =
            serde_json::from_reader(r).with_context(|| "parse manifest JSON")?;
        Ok(manifest)
    }

    /// Overlay this manifest onto `cfg`, resolving relative paths against
    /// `root`. Returns the replacement catalog, if one was declared.
    pub fn apply(self, root: &Path, cfg: &mut PipelineConfig) -> Option<Vec<CatalogEntry>> {
        if let Some(p) = self.compiler {
            cfg.compiler = root.join(p);
        }
        if let Some(p) = self.cross_compiler {
            cfg.cross_compiler = root.join(p);
        }
        if let Some(p) = self.source_dir {
            cfg.source_dir = root.join(p);
        }
        if let Some(p) = self.include_dir {
            cfg.include_dir = root.join(p);
        }
        if let Some(p) = self.generated_dir {
            cfg.generated_dir = root.join(p);
        }
        if let Some(defines) = self.base_defines {
            cfg.base_defines = defines;
        }
        if let Some(level) = self.feature_level {
            cfg.feature_level = level;
        }
        if let Some(p) = self.intermediate_path {
            cfg.intermediate_path = Some(root.join(p));
        }
        if let Some(secs) = self.tool_timeout_secs {
            cfg.tool_timeout = Some(Duration::from_secs(secs));
        }
        self.shaders
    }
}
