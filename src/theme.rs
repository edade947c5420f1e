// 🌗 Theme State - light/dark colour mode
// One process-wide flag, flipped through a single entry point.

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeMode {
    pub is_dark: bool,
}

impl ThemeMode {
    pub const LIGHT: ThemeMode = ThemeMode { is_dark: false };
    pub const DARK: ThemeMode = ThemeMode { is_dark: true };

    pub fn name(&self) -> &'static str {
        if self.is_dark {
            "dark"
        } else {
            "light"
        }
    }
}

// ============================================================================
// THEME CONTAINER
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Theme {
    mode: ThemeMode,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Theme { mode }
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.mode.is_dark = !self.mode.is_dark;
        info!(mode = self.mode.name(), "theme toggled");
        self.mode
    }

    pub fn current_mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark
    }

    pub fn palette(&self) -> &'static Palette {
        Palette::for_mode(self.mode)
    }
}

// ============================================================================
// PALETTES
// ============================================================================

/// Static colour set, hex encoded so it stays independent of the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub card: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

pub const LIGHT_PALETTE: Palette = Palette {
    background: "#F8F9FA",
    surface: "#E8EAF6",
    text: "#07161B",
    muted: "#666666",
    accent: "#448A99",
    card: "#2F80ED",
    error: "#D32F2F",
    success: "#45A049",
};

pub const DARK_PALETTE: Palette = Palette {
    background: "#1A1A2E",
    surface: "#16213E",
    text: "#CEC7BF",
    muted: "#888888",
    accent: "#66A5B3",
    card: "#2C5364",
    error: "#FF6B6B",
    success: "#4CAF50",
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        if mode.is_dark {
            &DARK_PALETTE
        } else {
            &LIGHT_PALETTE
        }
    }
}

/// "#RRGGBB" -> (r, g, b)
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
