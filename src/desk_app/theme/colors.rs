//! Color constants for the customer desk

use eframe::egui::Color32;

/// Window background - Slate
pub const BG_DARK: Color32 = Color32::from_rgb(0x1F, 0x26, 0x30);

/// Header bar background
pub const HEADER_BG: Color32 = Color32::from_rgb(0x26, 0x32, 0x40);

/// Card background
pub const CARD_BG: Color32 = Color32::from_rgb(0x2C, 0x38, 0x47);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0x3D, 0x4C, 0x5E);

/// Row highlighted while its record is being edited
pub const ROW_SELECTED: Color32 = Color32::from_rgb(0x35, 0x4A, 0x5F);

/// Input field background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x1A, 0x21, 0x2A);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xEC, 0xF0, 0xF4);

/// Secondary text (interest line, hints)
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x9A, 0xA8, 0xB8);

/// Primary action - Teal
pub const ACCENT: Color32 = Color32::from_rgb(0x26, 0x8C, 0x85);

/// Hovered widgets
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x2F, 0xA3, 0x9A);

/// Delete buttons
pub const DANGER: Color32 = Color32::from_rgb(0xB2, 0x44, 0x44);

/// Success notice - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x2E, 0x7D, 0x32);

/// Error notice - Red
pub const ERROR: Color32 = Color32::from_rgb(0xC6, 0x28, 0x28);

/// Stale list warning - Orange
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);
