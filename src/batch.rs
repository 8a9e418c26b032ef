//! Batch rendering of the icon set to disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::composer::compose;
use crate::error::{IconError, IconResult};
use crate::icon::IconImage;
use crate::manifest::{IconGroup, Manifest};
use crate::profile::{HueRotationSettings, RenderProfile};
use crate::surface::Scene;
use crate::svg::SvgRasterizer;

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from a [`RenderProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    fn apply_profile(&mut self, profile: &RenderProfile);

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> RenderProfile;
}

// ============================================================================
// BatchRenderer
// ============================================================================

/// A file written by [`BatchRenderer::render_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub size: u32,
}

/// Renders every manifest entry and writes it as a PNG.
///
/// # Example
///
/// ```no_run
/// use wizard_icons::{BatchRenderer, RenderProfile};
///
/// let renderer = BatchRenderer::new(RenderProfile::default());
/// let written = renderer.render_all("icons")?;
/// assert_eq!(written.len(), 14);
/// # Ok::<(), wizard_icons::IconError>(())
/// ```
pub struct BatchRenderer {
    manifest: Manifest,
    hue_rotation: Option<HueRotationSettings>,
    system_fonts: bool,
    rasterizer: SvgRasterizer,
}

impl BatchRenderer {
    /// Creates a renderer configured from `profile`.
    pub fn new(profile: RenderProfile) -> Self {
        Self {
            manifest: profile.manifest_or_default(),
            hue_rotation: profile.hue_rotation,
            system_fonts: profile.system_fonts,
            rasterizer: rasterizer_for(profile.system_fonts),
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Builds the scene for one icon size, with any hue rotation applied.
    pub fn scene(&self, size: u32) -> Scene {
        let mut scene = Scene::new();
        compose(&mut scene, size);
        if let Some(degrees) = self.hue_rotation.and_then(|h| h.effective_degrees()) {
            scene.rotate_hue(degrees);
        }
        scene
    }

    /// Renders one icon of `size` x `size` pixels.
    pub fn render(&self, size: u32) -> IconResult<IconImage> {
        if size == 0 {
            return Err(IconError::InvalidSize { size });
        }
        self.rasterizer.rasterize(&self.scene(size), size)
    }

    /// Renders one icon and encodes it as PNG.
    pub fn render_png(&self, size: u32) -> IconResult<Vec<u8>> {
        self.render(size)?.encode_png()
    }

    /// Renders the whole manifest into `output_dir`.
    ///
    /// The directory is created if needed. Existing files with manifest
    /// names are overwritten; other files are left alone. The first failure
    /// aborts the batch.
    pub fn render_all(&self, output_dir: impl AsRef<Path>) -> IconResult<Vec<RenderedFile>> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir).map_err(|e| IconError::io(output_dir, e))?;

        let mut written = Vec::with_capacity(self.manifest.len());
        let mut current_group: Option<IconGroup> = None;
        for entry in &self.manifest {
            if current_group != Some(entry.group) {
                info!("{}:", entry.group.label());
                current_group = Some(entry.group);
            }

            let png = self.render_png(entry.size)?;
            let path = output_dir.join(entry.file_name());
            fs::write(&path, &png).map_err(|e| IconError::io(&path, e))?;

            info!(path = %path.display(), size = entry.size, "wrote icon");
            debug!(bytes = png.len(), "png encoded");
            written.push(RenderedFile {
                path,
                size: entry.size,
            });
        }

        info!(count = written.len(), dir = %output_dir.display(), "all icons generated");
        Ok(written)
    }
}

impl Default for BatchRenderer {
    fn default() -> Self {
        Self::new(RenderProfile::default())
    }
}

impl Configurable for BatchRenderer {
    fn apply_profile(&mut self, profile: &RenderProfile) {
        self.manifest = profile.manifest_or_default();
        self.hue_rotation = profile.hue_rotation;

        if profile.system_fonts != self.system_fonts {
            self.system_fonts = profile.system_fonts;
            self.rasterizer = rasterizer_for(profile.system_fonts);
        }
    }

    fn export_profile(&self) -> RenderProfile {
        RenderProfile {
            hue_rotation: self.hue_rotation,
            manifest: Some(self.manifest.clone()),
            system_fonts: self.system_fonts,
        }
    }
}

fn rasterizer_for(system_fonts: bool) -> SvgRasterizer {
    if system_fonts {
        SvgRasterizer::new()
    } else {
        SvgRasterizer::without_system_fonts()
    }
}

/// Renders the default icon set into `output_dir`.
pub fn render_all(output_dir: impl AsRef<Path>) -> IconResult<Vec<RenderedFile>> {
    BatchRenderer::default().render_all(output_dir)
}

// ============================================================================
// Tests
// ============================================================================
