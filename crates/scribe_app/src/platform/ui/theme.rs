use ratatui::style::Color;

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: Color::Rgb(24, 24, 27),
                foreground: Color::Rgb(228, 228, 231),
                muted: Color::Rgb(113, 113, 122),
                accent: Color::Rgb(129, 140, 248),
                border: Color::Rgb(63, 63, 70),
                error: Color::Rgb(248, 113, 113),
                success: Color::Rgb(74, 222, 128),
                highlight: Color::Rgb(49, 46, 129),
            }
        } else {
            Self {
                background: Color::Rgb(250, 250, 250),
                foreground: Color::Rgb(24, 24, 27),
                muted: Color::Rgb(113, 113, 122),
                accent: Color::Rgb(79, 70, 229),
                border: Color::Rgb(212, 212, 216),
                error: Color::Rgb(220, 38, 38),
                success: Color::Rgb(22, 163, 74),
                highlight: Color::Rgb(224, 231, 255),
            }
        }
    }

    pub fn label(dark_mode: bool) -> &'static str {
        if dark_mode {
            "dark"
        } else {
            "light"
        }
    }
}
