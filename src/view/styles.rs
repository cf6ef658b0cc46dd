//! Sheet styling configuration.
//!
//! Terminals have no alpha channel, so card opacity is approximated by
//! stepping the foreground color down a gray ramp.

use ratatui::style::{Color, Modifier, Style};

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== SheetStyles =====

/// Style bundle for the sheet overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetStyles {
    border_style: Style,
    grabber_style: Style,
    title_style: Style,
    body_style: Style,
}

impl SheetStyles {
    /// Default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Color scheme honoring the color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                border_style: Style::default().fg(Color::White),
                grabber_style: Style::default().fg(Color::DarkGray),
                title_style: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                body_style: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                border_style: Style::default(),
                grabber_style: Style::default(),
                title_style: Style::default().add_modifier(Modifier::BOLD),
                body_style: Style::default(),
            }
        }
    }

    /// Border style for the sheet frame.
    pub fn border(&self) -> Style {
        self.border_style
    }

    /// Style for the grabber bar in the sheet's top line.
    pub fn grabber(&self) -> Style {
        self.grabber_style
    }

    /// Style for the sheet title.
    pub fn title(&self) -> Style {
        self.title_style
    }

    /// Body style faded to approximate the given card opacity.
    pub fn body_for_opacity(&self, opacity: f64) -> Style {
        // Four perceptual steps stand in for a continuous alpha ramp.
        let color = if opacity >= 0.85 {
            return self.body_style;
        } else if opacity >= 0.6 {
            Color::Gray
        } else if opacity >= 0.35 {
            Color::DarkGray
        } else {
            Color::Black
        };
        Style::default().fg(color)
    }
}

impl Default for SheetStyles {
    fn default() -> Self {
        Self::new()
    }
}
