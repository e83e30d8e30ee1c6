//! Color constants for the PropertyHub look.
//!
//! Coastal daylight palette: white surfaces, ocean-blue accents.

#![allow(dead_code)]

// === SURFACES ===
pub const SURFACE: &str = "#ffffff";
pub const SURFACE_MUTED: &str = "#f9fafb";
pub const SURFACE_SUNKEN: &str = "#f3f4f6";
pub const BORDER: &str = "#e5e7eb";

// === OCEAN BLUE (Actions, Links, Active) ===
pub const OCEAN: &str = "#2563eb";
pub const OCEAN_DEEP: &str = "#1d4ed8";
pub const OCEAN_TINT: &str = "#dbeafe";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#111827";
pub const TEXT_SECONDARY: &str = "#4b5563";
pub const TEXT_MUTED: &str = "#9ca3af";

// === ACCENTS ===
pub const STAR_GOLD: &str = "#f59e0b";
pub const DISCOUNT_RED: &str = "#dc2626";

// === HERO ===
pub const HERO_GRADIENT_FROM: &str = "#0f3a63";
pub const HERO_GRADIENT_TO: &str = "#1d7a8c";
