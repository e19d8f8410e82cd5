//! Rendered artifacts.
//!
//! A section renders into one or more [`Artifact`]s: immutable visual units
//! with a stable positional identity and a resolution-independent draw list.
//! Rendering is pure, so artifacts can be re-derived at any time and memoized
//! by section fingerprint.

pub mod draw;
pub mod fingerprint;
pub mod palette;
pub mod render;

pub use draw::{DrawElement, DrawList, PositionedElement, Stroke, TextAlign, TextStyle};
pub use fingerprint::{section_fingerprint, RENDERER_VERSION};
pub use render::render_section;

use sheaf_types::ArtifactId;

/// A rendered, immutable visual unit with a stable positional identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub id: ArtifactId,
    pub kind: ArtifactKind,
    /// Human-readable label (section or row-group header), for logs and
    /// artifact listings. Not part of the drawn content.
    pub label: String,
    pub content: DrawList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    TableImage,
    ChartImage,
    SeparatorMarker,
    /// Stand-in for an invalid or unsupported section. Shown on screen,
    /// never exported.
    Placeholder,
}

impl ArtifactKind {
    pub fn is_exportable(self) -> bool {
        !matches!(self, ArtifactKind::Placeholder)
    }
}
