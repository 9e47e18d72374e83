use serde::{Deserialize, Serialize};

/// Author-declared description of one logical shader to build.
///
/// `stem` carries both the base name and the stage suffix; the source file
/// on disk is `<stem>.hlsl` and the generated artifact is `<stem>.glsl`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub stem: String,
    /// Also emit an `animated_` variant compiled with `HAS_ANIMATION=1`.
    /// Only valid on vertex stems.
    #[serde(default)]
    pub animated: bool,
}

impl CatalogEntry {
    pub fn new(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            animated: false,
        }
    }

    pub fn animated(stem: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            animated: true,
        }
    }
}

/// The shaders regenerated by a default `generate` run, in build order.
pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new("bloom_setup.comp"),
        CatalogEntry::new("bloom_downsample.comp"),
        CatalogEntry::new("bloom_upsample.comp"),
        CatalogEntry::new("depth.pixel"),
        CatalogEntry::new("particle_draw.vert"),
        CatalogEntry::new("particle_draw.pixel"),
        CatalogEntry::new("particle_initialization.comp"),
        CatalogEntry::new("particle_kickoff.comp"),
        CatalogEntry::new("particle_emission.comp"),
        CatalogEntry::new("particle_simulation.comp"),
        CatalogEntry::animated("shadowmap_point.vert"),
        CatalogEntry::new("shadowmap_point.pixel"),
        CatalogEntry::new("shadow.vert"),
    ]
}
