mod apply_theme;
mod theme_state;

pub use apply_theme::apply_theme;
pub use theme_state::ThemeState;
