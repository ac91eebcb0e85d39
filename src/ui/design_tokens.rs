// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the presentation UI.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//!
//! Tokens are designed to be consistent; maintain the ratios (e.g.
//! `MD = XS * 2`) when adjusting them.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (amber scale)
    pub const ACCENT_200: Color = Color::from_rgb(0.98, 0.88, 0.65);
    pub const ACCENT_400: Color = Color::from_rgb(0.95, 0.73, 0.34);
    pub const ACCENT_500: Color = Color::from_rgb(0.9, 0.62, 0.2);
    pub const ACCENT_600: Color = Color::from_rgb(0.78, 0.5, 0.12);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Dimmed state for inactive subsection dots and disabled entries.
    pub const DIMMED: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the navigation sidebar.
    pub const NAV_WIDTH: f32 = 160.0;

    /// Side of an inactive subsection indicator dot.
    pub const DOT: f32 = 6.0;

    /// Width of the active (stretched) subsection indicator.
    pub const DOT_ACTIVE_WIDTH: f32 = 22.0;

    /// Vertical offset applied to an entering panel while it transitions.
    pub const PANEL_ENTER_OFFSET: f32 = 48.0;

    /// Maximum readable width of a panel or a blog post body.
    pub const CONTENT_MAX_WIDTH: f32 = 720.0;

    /// Rendered size of a work's cover illustration.
    pub const COVER_WIDTH: f32 = 280.0;
    pub const COVER_HEIGHT: f32 = 170.0;

    /// Social link icon side.
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const LEAD: f32 = 16.0;
    pub const SUBTITLE: f32 = 20.0;
    pub const TITLE: f32 = 28.0;
    pub const DISPLAY: f32 = 40.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const PILL: f32 = 999.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
        offset: Vector::new(0.0, 1.0),
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 8.0,
    };
}
