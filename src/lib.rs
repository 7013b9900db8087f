pub mod components;
pub mod configs;
pub mod error;
pub mod sections;
pub mod utils;
pub mod views;

#[cfg(test)]
mod tests;

pub use crate::error::DomError;
pub use crate::sections::{Section, SECTIONS};
pub use crate::utils::{apply_theme, ThemeState};
