#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl Default for ThemeState {
    // The site opens in dark mode.
    fn default() -> Self {
        Self { is_dark: true }
    }
}

impl ThemeState {
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
    }

    /// Class carried by the app root element.
    pub fn class(&self) -> &'static str {
        if self.is_dark {
            "dark"
        } else {
            "light"
        }
    }

    /// Palette classes written onto `<body>` by `apply_theme`.
    pub fn body_class(&self) -> &'static str {
        if self.is_dark {
            "bg-black text-white"
        } else {
            "bg-white text-black"
        }
    }

    /// The toggle button shows the mode a click would switch to, not
    /// the one currently active.
    pub fn toggle_icon(&self) -> &'static str {
        if self.is_dark {
            "🌞"
        } else {
            "🌙"
        }
    }
}
