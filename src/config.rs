use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::error::{ShadergenError, ShadergenResult};

/// Paths, defines, and toolchain settings for one generation run.
///
/// All paths are absolute or relative to the invoking process; use
/// [`PipelineConfig::for_project`] to derive the conventional layout from a
/// project root.
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    /// Frontend compiler binary (DXC-compatible argument contract).
    pub compiler: PathBuf,
    /// Backend cross-compiler binary (SPIRV-Cross-compatible).
    pub cross_compiler: PathBuf,
    /// Directory holding the `<stem>.hlsl` sources.
    pub source_dir: PathBuf,
    /// Include search path handed to the frontend via `-I`.
    pub include_dir: PathBuf,
    /// Generated-output tree, wiped and recreated on every run.
    pub generated_dir: PathBuf,
    /// Preprocessor defines applied to every target.
    pub base_defines: Vec<String>,
    /// GLSL version token handed to the cross-compiler via `--version`.
    pub feature_level: String,
    /// Override for the shared intermediate SPIR-V path. `None` places it
    /// under the system temp directory with a run-unique name.
    pub intermediate_path: Option<PathBuf>,
    /// Bound on each external tool invocation. `None` waits indefinitely.
    pub tool_timeout: Option<Duration>,
}

impl PipelineConfig {
    /// Conventional layout for a project rooted at `root`.
    pub fn for_project(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            compiler: root.join("bin/dxc"),
            cross_compiler: root.join("bin/spirv-cross"),
            source_dir: root.join("source/shader/hlsl"),
            include_dir: root.join("source/shader"),
            generated_dir: root.join("source/shader/glsl_generated"),
            base_defines: vec!["HLSL_LANG=1".to_string(), "HLSL_LANG_D3D11=1".to_string()],
            feature_level: "450".to_string(),
            intermediate_path: None,
            tool_timeout: None,
        }
    }

    pub fn validate(&self) -> ShadergenResult<()> {
        if self.feature_level.is_empty()
            || !self.feature_level.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ShadergenError::config(format!(
                "feature level '{}' must be a GLSL version number",
                self.feature_level
            )));
        }
        for define in &self.base_defines {
            if define.is_empty() || define.chars().any(char::is_whitespace) {
                return Err(ShadergenError::config(format!(
                    "invalid preprocessor define '{define}'"
                )));
            }
        }
        if let Some(timeout) = self.tool_timeout
            && timeout.is_zero()
        {
            return Err(ShadergenError::config("tool timeout must be non-zero"));
        }
        Ok(())
    }

    pub fn with_intermediate_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.intermediate_path = Some(path.into());
        self
    }

    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        self.tool_timeout = Some(timeout);
        self
    }
}
