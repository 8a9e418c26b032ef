//! Serializable render configuration.
//!
//! A [`RenderProfile`] captures everything that can vary between runs in a
//! JSON-friendly format. The default profile reproduces the reference icon
//! set exactly.
//!
//! # Example
//!
//! ```
//! use wizard_icons::{HueRotationSettings, RenderProfile};
//!
//! let profile = RenderProfile::new()
//!     .with_hue_rotation(HueRotationSettings { degrees: 180.0, enabled: true });
//!
//! let json = profile.to_json().unwrap();
//! let restored = RenderProfile::from_json(&json).unwrap();
//! assert_eq!(restored.effective_hue_rotation(), Some(180.0));
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IconError, IconResult};
use crate::manifest::Manifest;

/// Serializable settings for re-tinting the icon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HueRotationSettings {
    /// Rotation angle in degrees; normalized to 0-360 when applied.
    pub degrees: f32,

    /// Whether the rotation is applied.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl HueRotationSettings {
    /// The normalized rotation to apply, if any.
    ///
    /// Disabled settings and rotations equivalent to zero yield `None`.
    pub fn effective_degrees(&self) -> Option<f32> {
        if !self.enabled {
            return None;
        }
        let degrees = self.degrees.rem_euclid(360.0);
        (degrees != 0.0).then_some(degrees)
    }
}

fn default_true() -> bool {
    true
}

/// A serializable profile containing all render settings.
///
/// # JSON Format
///
/// ```json
/// {
///   "hueRotation": { "degrees": 180.0, "enabled": true },
///   "manifest": [ { "size": 512, "group": "standard" } ],
///   "systemFonts": true
/// }
/// ```
///
/// Every field is optional; `{}` is the default profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderProfile {
    /// Hue rotation settings. `None` renders the reference colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue_rotation: Option<HueRotationSettings>,

    /// Files to produce. `None` means the default 14-file manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<Manifest>,

    /// Whether to load system fonts for the text layers.
    #[serde(default = "default_true")]
    pub system_fonts: bool,
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self {
            hue_rotation: None,
            manifest: None,
            system_fonts: true,
        }
    }
}

impl RenderProfile {
    /// Creates the default profile.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hue_rotation(mut self, settings: HueRotationSettings) -> Self {
        self.hue_rotation = Some(settings);
        self
    }

    pub fn with_manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn with_system_fonts(mut self, enabled: bool) -> Self {
        self.system_fonts = enabled;
        self
    }

    /// The hue rotation in effect, see [`HueRotationSettings::effective_degrees`].
    pub fn effective_hue_rotation(&self) -> Option<f32> {
        self.hue_rotation.and_then(|settings| settings.effective_degrees())
    }

    /// The manifest to render, falling back to the default one.
    pub fn manifest_or_default(&self) -> Manifest {
        self.manifest.clone().unwrap_or_default()
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> IconResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| IconError::io(path, e))?;
        Ok(Self::from_json(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{IconGroup, ManifestEntry};

    #[test]
    fn empty_profile_deserializes_to_default() {
        let profile = RenderProfile::from_json("{}").unwrap();
        assert_eq!(profile, RenderProfile::default());
        assert!(profile.system_fonts);
        assert_eq!(profile.manifest_or_default().len(), 14);
    }

    #[test]
    fn profile_json_format() {
        let profile = RenderProfile::new()
            .with_hue_rotation(HueRotationSettings {
                degrees: 90.0,
                enabled: true,
            })
            .with_manifest(Manifest::new(vec![ManifestEntry::new(64, IconGroup::Favicon)]));

        let json = profile.to_json_pretty().unwrap();
        assert!(json.contains("\"hueRotation\""));
        assert!(json.contains("\"systemFonts\""));
        assert!(json.contains("\"favicon\""));

        let restored = RenderProfile::from_json(&json).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn default_profile_omits_optional_sections() {
        let json = RenderProfile::default().to_json().unwrap();
        assert_eq!(json, r#"{"systemFonts":true}"#);
    }

    #[test]
    fn hue_rotation_enabled_defaults_to_true() {
        let profile = RenderProfile::from_json(r#"{"hueRotation":{"degrees":45}}"#).unwrap();
        assert_eq!(profile.effective_hue_rotation(), Some(45.0));
    }

    #[test]
    fn effective_hue_rotation_normalizes_and_skips_noops() {
        let rotated = |degrees, enabled| {
            RenderProfile::new()
                .with_hue_rotation(HueRotationSettings { degrees, enabled })
                .effective_hue_rotation()
        };

        assert_eq!(rotated(450.0, true), Some(90.0));
        assert_eq!(rotated(-90.0, true), Some(270.0));
        assert_eq!(rotated(720.0, true), None);
        assert_eq!(rotated(120.0, false), None);
        assert_eq!(RenderProfile::new().effective_hue_rotation(), None);
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, r#"{"systemFonts":false}"#).unwrap();
        assert!(!RenderProfile::load(&path).unwrap().system_fonts);

        let missing = RenderProfile::load(dir.path().join("nope.json"));
        assert!(matches!(missing, Err(IconError::Io { .. })));
    }

    #[test]
    fn malformed_profile_is_a_profile_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(RenderProfile::load(&path), Err(IconError::Profile(_))));
    }
}
