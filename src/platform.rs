use std::fs;

use crate::config::{GlyphSet, GLYPHS_ASCII, GLYPHS_UNICODE};

/// Runtime platform capabilities relevant to rendering.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Platform {
    is_wsl: bool,
}

impl Platform {
    /// Detects platform details from the current runtime environment.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            is_wsl: detect_wsl(),
        }
    }

    /// Returns true when running under Windows Subsystem for Linux.
    #[must_use]
    pub fn is_wsl(self) -> bool {
        self.is_wsl
    }

    /// Picks the glyph set for this platform.
    ///
    /// WSL consoles render block glyphs unreliably, so they fall back to
    /// ASCII. `force_ascii` honors the `--ascii` flag.
    #[must_use]
    pub fn glyphs(self, force_ascii: bool) -> &'static GlyphSet {
        if force_ascii || self.is_wsl {
            &GLYPHS_ASCII
        } else {
            &GLYPHS_UNICODE
        }
    }
}

fn detect_wsl() -> bool {
    let Ok(version) = fs::read_to_string("/proc/version") else {
        return false;
    };

    version.to_ascii_lowercase().contains("microsoft")
}
