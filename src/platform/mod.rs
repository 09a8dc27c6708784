//! @acp:module "Platform Limits"
//! @acp:summary "Target platforms and their maximum post lengths"
//! @acp:domain scoring
//! @acp:layer config

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PostscoreError;

/// @acp:summary "Supported social-media platforms"
///
/// Each platform maps to exactly one maximum post length. Unknown platform
/// names are rejected at the parse boundary; past it, an invalid platform
/// is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    LinkedIn,
}

impl Platform {
    /// All supported platforms, in display order
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::Instagram,
        Platform::LinkedIn,
    ];

    /// Maximum post length in characters (Unicode scalar values)
    pub fn max_chars(self) -> usize {
        match self {
            Platform::Twitter => 280,
            Platform::Facebook => 63_206,
            Platform::Instagram => 2_200,
            Platform::LinkedIn => 3_000,
        }
    }

    /// Lowercase identifier used on the CLI and in JSON output
    pub fn id(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::LinkedIn => "linkedin",
        }
    }
}

impl FromStr for Platform {
    type Err = PostscoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "twitter" | "x" => Ok(Platform::Twitter),
            "facebook" | "fb" => Ok(Platform::Facebook),
            "instagram" | "ig" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::LinkedIn),
            other => Err(PostscoreError::UnknownPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
