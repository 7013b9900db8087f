use crate::error::DomError;
use crate::utils::ThemeState;

/// Writes the active palette onto `<body>`. The only place the
/// document is mutated; the state transition itself stays pure.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: &ThemeState) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let body = document.body().ok_or(DomError::NoBody)?;

    body.set_class_name(theme.body_class());
    log::debug!("document body restyled for {} theme", theme.class());

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(theme: &ThemeState) -> Result<(), DomError> {
    // No document outside the browser; the flag alone carries the theme.
    log::debug!("{} theme kept in memory, no document to restyle", theme.class());
    Ok(())
}
