//! wizard-icons: procedural renderer for the Wizard app icon set
//!
//! This crate draws the Wizard icon (a wizard hat over a playing card on a
//! glowing disc) at any pixel size and writes the standard PWA, iOS and
//! favicon PNG files.
//!
//! # Example
//!
//! ```no_run
//! use wizard_icons::{BatchRenderer, RenderProfile};
//!
//! let renderer = BatchRenderer::new(RenderProfile::default());
//!
//! // A single icon in memory
//! let png = renderer.render_png(192)?;
//!
//! // The whole set on disk
//! let written = renderer.render_all("icons")?;
//! assert_eq!(written.len(), 14);
//! # Ok::<(), wizard_icons::IconError>(())
//! ```
//!
//! # Custom Surfaces
//!
//! [`compose`] draws onto any [`Surface`]. The bundled [`Scene`] records
//! the draw calls so they can be inspected or rasterized:
//!
//! ```
//! use wizard_icons::{Scene, compose};
//!
//! let mut scene = Scene::new();
//! compose(&mut scene, 64);
//! assert_eq!(scene.groups().len(), 13);
//! assert!(scene.to_svg(64).starts_with("<svg"));
//! ```
//!
//! # Serializable Profiles
//!
//! Run settings live in a [`RenderProfile`], applied with the
//! [`Configurable`] trait:
//!
//! ```
//! use wizard_icons::{
//!     BatchRenderer, Configurable, HueRotationSettings, RenderProfile,
//! };
//!
//! let mut renderer = BatchRenderer::new(RenderProfile::new().with_system_fonts(false));
//!
//! let profile = RenderProfile::new()
//!     .with_system_fonts(false)
//!     .with_hue_rotation(HueRotationSettings { degrees: 180.0, enabled: true });
//! renderer.apply_profile(&profile);
//!
//! let json = renderer.export_profile().to_json().unwrap();
//! assert!(json.contains("hueRotation"));
//! ```

mod batch;
mod composer;
mod error;
mod geometry;
mod icon;
mod manifest;
mod paint;
mod profile;
mod surface;
mod svg;

pub use batch::{BatchRenderer, Configurable, RenderedFile, render_all};
pub use composer::{PARTICLE_COUNT, PARTICLES, Particle, compose};
pub use error::{IconError, IconResult};
pub use geometry::{Path, PathCommand, Point, rounded_rect_path, star_path};
pub use icon::IconImage;
pub use manifest::{IconGroup, Manifest, ManifestEntry};
pub use paint::{Color, GradientStop, Paint, Shadow};
pub use profile::{HueRotationSettings, RenderProfile};
pub use surface::{Baseline, DrawCommand, Group, Operation, Scene, Shape, Surface, Target, Text};
pub use svg::{SvgRasterizer, path_data, render_svg};
