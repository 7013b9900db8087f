use crate::tests::common;
use crate::utils::{apply_theme, ThemeState};

#[test]
fn initial_theme_is_dark() {
    assert!(ThemeState::default().is_dark);
}

#[test]
fn toggle_switches_to_light_and_back() {
    let mut theme = ThemeState::default();

    theme.toggle();
    assert!(!theme.is_dark);
    assert_eq!(theme.class(), "light");

    theme.toggle();
    assert!(theme.is_dark);
    assert_eq!(theme.class(), "dark");
}

#[test]
fn toggle_parity_matches_call_count() {
    for toggles in 0..8usize {
        let mut theme = ThemeState::default();
        for _ in 0..toggles {
            theme.toggle();
        }
        let expected = ThemeState::default().is_dark ^ (toggles % 2 == 1);
        assert_eq!(theme.is_dark, expected, "after {} toggles", toggles);
    }
}

#[test]
fn body_palettes_differ_per_mode() {
    let dark = ThemeState { is_dark: true };
    let light = ThemeState { is_dark: false };

    assert_eq!(dark.body_class(), "bg-black text-white");
    assert_eq!(light.body_class(), "bg-white text-black");
    assert_ne!(dark.body_class(), light.body_class());
}

#[test]
fn icon_invites_the_opposite_mode() {
    let mut theme = ThemeState::default();
    assert_eq!(theme.toggle_icon(), "🌞");

    theme.toggle();
    assert_eq!(theme.toggle_icon(), "🌙");

    theme.toggle();
    assert_eq!(theme.toggle_icon(), "🌞");
}

#[test]
fn apply_theme_always_succeeds_off_browser() {
    common::setup();

    assert!(apply_theme(&ThemeState::default()).is_ok());

    let mut light = ThemeState::default();
    light.toggle();
    assert!(apply_theme(&light).is_ok());
}
