// ABOUTME: Immutable color palette built once at startup and passed down to every component

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

use super::ThemeOverrides;

/// Dark palette used by every component.
///
/// Built once from [`ThemeOverrides`] and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub primary_light: Color,
    pub secondary: Color,
    pub background: Color,
    pub paper: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,
    pub divider: Color,
    pub error: Color,
    pub info: Color,
}

impl Theme {
    /// Material-style dark palette
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(0x90, 0xCA, 0xF9),
            primary_light: Color::Rgb(0xE3, 0xF2, 0xFD),
            secondary: Color::Rgb(0x4D, 0xB6, 0xAC),
            background: Color::Rgb(0x12, 0x12, 0x12),
            paper: Color::Rgb(0x1E, 0x1E, 0x1E),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            // 70% white over the dark background
            text_secondary: Color::Rgb(0xB3, 0xB3, 0xB3),
            text_disabled: Color::Rgb(0x80, 0x80, 0x80),
            divider: Color::Rgb(0x3D, 0x3D, 0x3D),
            error: Color::Rgb(0xF4, 0x43, 0x36),
            info: Color::Rgb(0x29, 0xB6, 0xF6),
        }
    }

    /// Dark palette with any valid hex overrides applied
    pub fn from_overrides(overrides: &ThemeOverrides) -> Self {
        let mut theme = Self::dark();
        let slots: [(&str, &Option<String>, &mut Color); 6] = [
            ("primary", &overrides.primary, &mut theme.primary),
            ("secondary", &overrides.secondary, &mut theme.secondary),
            ("background", &overrides.background, &mut theme.background),
            ("paper", &overrides.paper, &mut theme.paper),
            ("text", &overrides.text, &mut theme.text),
            ("text_secondary", &overrides.text_secondary, &mut theme.text_secondary),
        ];

        for (name, value, slot) in slots {
            let Some(value) = value else { continue };
            match parse_hex_color(value) {
                Some(color) => *slot = color,
                None => warn!("Ignoring invalid theme color {} = {:?}", name, value),
            }
        }

        theme
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.primary_light).add_modifier(Modifier::BOLD)
    }

    pub fn body(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn disabled(&self) -> Style {
        Style::default().fg(self.text_disabled)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.divider)
    }

    pub fn panel(&self) -> Style {
        Style::default().bg(self.paper)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into an RGB color
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
