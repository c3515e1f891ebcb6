use ratatui::style::Color;

/// Light/dark flag for the whole dashboard. Modelled as an explicit context
/// value handed to the renderer, not ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Dark,
    Light,
}

impl Mode {
    /// Pure transition; `ColourMode::toggle` applies it in place.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourMode {
    pub mode: Mode,
}

impl Default for ColourMode {
    fn default() -> Self {
        Self { mode: Mode::Dark }
    }
}

impl ColourMode {
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }
}

pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub danger: Color,
}

/// Colour tokens per mode, in the spirit of the web dashboard's theme table.
pub fn tokens(mode: Mode) -> Palette {
    match mode {
        Mode::Dark => Palette {
            background: Color::Rgb(20, 27, 45),
            surface: Color::Rgb(31, 42, 64),
            text: Color::Rgb(224, 224, 224),
            muted: Color::Rgb(165, 165, 165),
            accent: Color::Rgb(76, 206, 172),
            danger: Color::Rgb(219, 79, 74),
        },
        Mode::Light => Palette {
            background: Color::Rgb(252, 252, 252),
            surface: Color::Rgb(242, 240, 240),
            text: Color::Rgb(41, 41, 41),
            muted: Color::Rgb(102, 102, 102),
            accent: Color::Rgb(61, 165, 138),
            danger: Color::Rgb(175, 63, 59),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_mode_is_dark() {
        assert_eq!(ColourMode::default().mode, Mode::Dark);
    }

    #[test]
    fn toggled_is_a_pure_involution() {
        assert_eq!(Mode::Dark.toggled(), Mode::Light);
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert_eq!(Mode::Dark.toggled().toggled(), Mode::Dark);
    }

    #[test]
    fn toggle_flips_the_context_in_place() {
        let mut colour = ColourMode::default();
        colour.toggle();
        assert_eq!(colour.mode, Mode::Light);
        colour.toggle();
        assert_eq!(colour.mode, Mode::Dark);
    }

    #[test]
    fn token_palettes_differ_per_mode() {
        assert_ne!(
            tokens(Mode::Dark).background,
            tokens(Mode::Light).background
        );
    }
}
