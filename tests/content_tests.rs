// Host-side tests for the hero copy surface.
// The root crate is wasm-only, so these exercise the pure core crate directly.

use app_core::HeroContent;

#[test]
fn default_tagline_splits_into_three_fragments() {
    let content = HeroContent::default();
    let phrases = content.tagline_phrases();
    assert_eq!(phrases.as_slice(), ["Build", "Scale", "Innovate"]);
}

#[test]
fn entrance_delays_step_up_per_fragment() {
    let d0 = HeroContent::entrance_delay_sec(0);
    let d1 = HeroContent::entrance_delay_sec(1);
    let d2 = HeroContent::entrance_delay_sec(2);
    assert!((d0 - 0.4).abs() < 1e-6);
    assert!(d1 > d0 && d2 > d1);
    assert!((d1 - d0 - 0.2).abs() < 1e-6);
}

#[test]
fn empty_fragments_are_dropped() {
    let content = HeroContent {
        tagline: "Ship..Fast.".into(),
        ..HeroContent::default()
    };
    assert_eq!(content.tagline_phrases().as_slice(), ["Ship", "Fast"]);
}

#[test]
fn a_tagline_without_periods_is_one_fragment() {
    let content = HeroContent {
        tagline: "Just build".into(),
        ..HeroContent::default()
    };
    assert_eq!(content.tagline_phrases().as_slice(), ["Just build"]);
}

#[test]
fn default_copy_is_nonempty() {
    let content = HeroContent::default();
    assert!(!content.company_name.is_empty());
    assert!(!content.tagline.is_empty());
    assert!(!content.description.is_empty());
}
