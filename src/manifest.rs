//! The table of icon files to produce.

use serde::{Deserialize, Serialize};

/// A family of icon files sharing a filename prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconGroup {
    /// Web app manifest icons (`icon-<n>x<n>.png`).
    Standard,
    /// iOS home-screen icons (`apple-touch-icon-<n>x<n>.png`).
    AppleTouch,
    /// Browser tab icons (`favicon-<n>x<n>.png`).
    Favicon,
}

impl IconGroup {
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Self::Standard => "icon",
            Self::AppleTouch => "apple-touch-icon",
            Self::Favicon => "favicon",
        }
    }

    /// Human-readable name used in progress output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard PWA icons",
            Self::AppleTouch => "iOS icons",
            Self::Favicon => "Favicons",
        }
    }
}

/// One file to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Edge length in pixels.
    pub size: u32,
    pub group: IconGroup,
}

impl ManifestEntry {
    pub const fn new(size: u32, group: IconGroup) -> Self {
        Self { size, group }
    }

    /// The output file name, e.g. `favicon-32x32.png`.
    pub fn file_name(&self) -> String {
        format!(
            "{}-{size}x{size}.png",
            self.group.file_prefix(),
            size = self.size
        )
    }
}

const STANDARD_SIZES: [u32; 8] = [512, 384, 192, 144, 152, 128, 96, 72];
const APPLE_TOUCH_SIZES: [u32; 4] = [180, 167, 152, 120];
const FAVICON_SIZES: [u32; 2] = [32, 16];

/// An ordered list of files to render.
///
/// Serializes as a plain JSON array of entries. Duplicate sizes across
/// groups are intentional: each entry produces its own file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Manifest {
    /// The full PWA, iOS and favicon set: 14 files.
    fn default() -> Self {
        let groups = [
            (IconGroup::Standard, &STANDARD_SIZES[..]),
            (IconGroup::AppleTouch, &APPLE_TOUCH_SIZES[..]),
            (IconGroup::Favicon, &FAVICON_SIZES[..]),
        ];
        let entries = groups
            .into_iter()
            .flat_map(|(group, sizes)| {
                sizes
                    .iter()
                    .map(move |&size| ManifestEntry::new(size, group))
            })
            .collect();
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
