//! Colour palettes for the dark and light themes

use crate::model::catalog::{Icon, TrendDirection};
use crate::model::ui::Theme;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub positive: Color,
    pub warning: Color,
    pub primary_bg: Color,
    pub on_primary: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(2, 6, 23),
                surface: Color::Rgb(15, 23, 42),
                raised: Color::Rgb(30, 41, 59),
                border: Color::Rgb(51, 65, 85),
                text: Color::Rgb(241, 245, 249),
                muted: Color::Rgb(148, 163, 184),
                accent: Color::Rgb(96, 165, 250),
                accent_alt: Color::Rgb(192, 132, 252),
                positive: Color::Rgb(74, 222, 128),
                warning: Color::Rgb(250, 204, 21),
                primary_bg: Color::Rgb(37, 99, 235),
                on_primary: Color::Rgb(255, 255, 255),
            },
            Theme::Light => Self {
                background: Color::Rgb(248, 250, 252),
                surface: Color::Rgb(241, 245, 249),
                raised: Color::Rgb(226, 232, 240),
                border: Color::Rgb(203, 213, 225),
                text: Color::Rgb(15, 23, 42),
                muted: Color::Rgb(71, 85, 105),
                accent: Color::Rgb(37, 99, 235),
                accent_alt: Color::Rgb(147, 51, 234),
                positive: Color::Rgb(22, 163, 74),
                warning: Color::Rgb(202, 138, 4),
                primary_bg: Color::Rgb(37, 99, 235),
                on_primary: Color::Rgb(255, 255, 255),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn badge(&self) -> Style {
        Style::default().fg(self.accent).bg(self.raised)
    }

    pub fn icon_color(&self, icon: Icon) -> Color {
        match icon {
            Icon::Microscope | Icon::FileText | Icon::Activity => self.accent,
            Icon::Ruler | Icon::Brain => self.accent_alt,
            Icon::GitBranch | Icon::CheckCircle => self.positive,
            Icon::AlertTriangle => self.warning,
        }
    }

    pub fn trend_color(&self, direction: TrendDirection) -> Color {
        match direction {
            TrendDirection::Up => self.positive,
            TrendDirection::Neutral => self.accent,
        }
    }

    /// Blue-to-purple colour at `t` in 0.0..=1.0
    pub fn gradient(&self, t: f64) -> Color {
        lerp(self.accent, self.accent_alt, t)
    }
}

fn lerp(from: Color, to: Color, t: f64) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let t = t.clamp(0.0, 1.0);
            let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(palette.gradient(0.0), palette.accent);
        assert_eq!(palette.gradient(1.0), palette.accent_alt);
        assert_eq!(palette.gradient(7.0), palette.accent_alt);
    }

    #[test]
    fn test_trend_colors_follow_direction() {
        let palette = Palette::for_theme(Theme::Light);
        assert_eq!(palette.trend_color(TrendDirection::Up), palette.positive);
        assert_eq!(palette.trend_color(TrendDirection::Neutral), palette.accent);
    }
}
