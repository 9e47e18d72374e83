use crate::error::{ShadergenError, ShadergenResult};

/// Pipeline stage of a shader source, inferred from its stem suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Pixel,
    Compute,
    Geometry,
}

/// Compiler-facing parameters for one shader stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StageProfile {
    pub stage: ShaderStage,
    /// Shader-model token handed to the frontend via `-T`.
    pub target_model: &'static str,
    /// Entry-point name handed to the frontend via `-E`.
    pub entry_point: &'static str,
}

const ENTRY_POINT: &str = "main";

impl StageProfile {
    /// Resolve the profile for a catalog stem from its suffix.
    ///
    /// An unrecognized suffix is a fatal configuration error for the whole
    /// run, never a per-target skip.
    pub fn for_stem(stem: &str) -> ShadergenResult<Self> {
        let (stage, target_model) = if stem.ends_with(".vert") {
            (ShaderStage::Vertex, "vs_6_0")
        } else if stem.ends_with(".pixel") {
            (ShaderStage::Pixel, "ps_6_0")
        } else if stem.ends_with(".comp") {
            (ShaderStage::Compute, "cs_6_0")
        } else if stem.ends_with(".geom") {
            (ShaderStage::Geometry, "gs_6_0")
        } else {
            return Err(ShadergenError::config(format!(
                "unknown shader type '{stem}'"
            )));
        };
        Ok(Self {
            stage,
            target_model,
            entry_point: ENTRY_POINT,
        })
    }

    /// Return `true` for vertex-stage profiles (the only stage that may
    /// carry an animated variant).
    pub fn is_vertex(self) -> bool {
        self.stage == ShaderStage::Vertex
    }
}
