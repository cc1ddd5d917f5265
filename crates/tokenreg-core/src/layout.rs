//! On-disk layout conventions for asset directories.
//!
//! Every asset directory holds exactly one logo image with the
//! conventional name, plus an optional `info.json` descriptor.

use serde::{Deserialize, Serialize};

/// Base name of the required logo file.
pub const LOGO_NAME: &str = "logo";
/// Required logo extension (no leading dot).
pub const LOGO_EXTENSION: &str = "png";
/// Full conventional logo file name.
pub const LOGO_FULL_NAME: &str = "logo.png";
/// Full descriptor file name.
pub const INFO_FULL_NAME: &str = "info.json";

/// A file inside an asset directory, split into base name and extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetFile {
    /// Base name, up to the last dot.
    pub name: String,
    /// Extension after the last dot, empty when there is none.
    pub extension: String,
}

impl AssetFile {
    /// Split a plain file name at its last dot.
    pub fn from_file_name(file_name: &str) -> Self {
        match file_name.rsplit_once('.') {
            Some((name, extension)) => Self {
                name: name.to_string(),
                extension: extension.to_string(),
            },
            None => Self {
                name: file_name.to_string(),
                extension: String::new(),
            },
        }
    }

    /// Reassemble the full file name.
    pub fn full_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension)
        }
    }

    /// True when the base name marks this file as the logo, whatever the
    /// extension. Only such files are candidates for logo repair.
    pub fn has_logo_name(&self) -> bool {
        self.name == LOGO_NAME
    }

    /// True when this is exactly the conventional logo file.
    pub fn is_canonical_logo(&self) -> bool {
        self.name == LOGO_NAME && self.extension == LOGO_EXTENSION
    }
}
