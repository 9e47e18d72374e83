//! Shader catalog regeneration pipeline.
//!
//! Rebuilds a fixed catalog of GLSL shader artifacts from HLSL sources by
//! driving an external two-stage toolchain: a dxc-compatible frontend
//! (HLSL -> SPIR-V) and a spirv-cross-compatible backend (SPIR-V -> GLSL).
//! Flagged vertex sources additionally expand into an `animated_` variant
//! compiled with `HAS_ANIMATION=1`, and every emitted artifact is stamped
//! with a `/// File: <basename>` provenance line.
//!
//! [`run_generate`] performs a full, unconditional regeneration run:
//! the output tree is wiped and recreated once, targets build strictly in
//! catalog order, the first failure aborts the rest, and the shared
//! intermediate SPIR-V file is removed on every exit path.
#![forbid(unsafe_code)]

pub mod annotate;
pub mod catalog;
pub mod compile;
pub mod config;
pub mod error;
pub mod expand;
pub mod manifest;
pub mod pipeline;
pub mod stage;

pub use annotate::{annotate_file, annotate_tree};
pub use catalog::{CatalogEntry, default_catalog};
pub use compile::{compile_target, tool_available};
pub use config::PipelineConfig;
pub use error::{ShadergenError, ShadergenResult};
pub use expand::{ANIMATION_DEFINE, BuildTarget, expand_catalog, expand_entry};
pub use manifest::Manifest;
pub use pipeline::{GenerateStats, IntermediateGuard, reset_dir, run_generate};
pub use stage::{ShaderStage, StageProfile};
