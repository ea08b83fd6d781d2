use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, SeedableRng};

use chromatone::{
    contrast_ratio, generate_from_tag, generate_with_rng, hex_to_rgb, passes_aa, rgb_to_hex,
    suggest_accessible_color, Harmony, Rgb,
};

fn grid() -> impl Iterator<Item = Rgb> {
    let steps = || (0..=255u8).step_by(17);
    steps().flat_map(move |r| steps().flat_map(move |g| steps().map(move |b| Rgb::new(r, g, b))))
}

#[test]
fn hex_round_trip() {
    for rgb in grid() {
        let hex = rgb_to_hex(rgb);
        assert_eq!(hex.len(), 7);
        assert_eq!(hex_to_rgb(&hex).unwrap(), rgb);
        assert_eq!(hex_to_rgb(&hex.to_lowercase()).unwrap(), rgb);
    }
}

#[test]
fn hsl_round_trip_within_one() {
    for rgb in grid() {
        let back = rgb.to_hsl().to_rgb();
        for (a, b) in rgb.to_array().into_iter().zip(back.to_array()) {
            assert!(a.abs_diff(b) <= 1, "{rgb} came back as {back}");
        }
    }
}

#[test]
fn contrast_is_symmetric_and_bounded() {
    let colors: Vec<Rgb> = grid().step_by(97).collect();
    for &a in &colors {
        assert_abs_diff_eq!(contrast_ratio(a, a), 1.0, epsilon = 1e-5);
        for &b in &colors {
            let ratio = contrast_ratio(a, b);
            assert_eq!(ratio, contrast_ratio(b, a));
            assert!((1.0..=21.0 + 1e-4).contains(&ratio));
        }
    }
    assert_abs_diff_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0, epsilon = 1e-4);
}

#[test]
fn aa_boundary() {
    assert!(passes_aa(4.5));
    assert!(!passes_aa(4.4999));
}

#[test]
fn every_harmony_has_its_size() {
    let mut rng = StdRng::seed_from_u64(7);
    for seed in ["#FF0000", "#7E7E7E", "#000000", "#FFFFFF", "#3A7BD5"] {
        let seed = hex_to_rgb(seed).unwrap();
        for harmony in Harmony::ALL {
            let palette = generate_with_rng(seed, harmony, &mut rng);
            assert_eq!(palette.len(), harmony.palette_size(), "{harmony} from {seed}");
        }
    }
}

#[test]
fn deterministic_harmonies_repeat() {
    for harmony in Harmony::ALL {
        if harmony == Harmony::Random {
            continue;
        }
        let a = generate_from_tag("#3A7BD5", harmony.tag()).unwrap();
        let b = generate_from_tag("#3A7BD5", harmony.tag()).unwrap();
        assert_eq!(a, b, "{harmony}");
    }
}

#[test]
fn random_palette_repeats_with_the_same_seed() {
    let a = generate_with_rng(Rgb::BLACK, Harmony::Random, &mut StdRng::seed_from_u64(42));
    let b = generate_with_rng(Rgb::BLACK, Harmony::Random, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn unknown_tag_is_rejected() {
    assert!(generate_from_tag("#FF0000", "pastel").is_err());
    assert!(generate_from_tag("#FF00", "triadic").is_err());
}

#[test]
fn monochromatic_scenario() {
    let palette = generate_from_tag("#7E7E7E", "monochromatic").unwrap();
    assert_eq!(palette.to_hex_strings()[0], "#1A1A1A");
    assert_eq!(palette.to_hex_strings()[4], "#7E7E7E");
    assert_eq!(palette.to_hex_strings()[7], "#C9C9C9");
    assert_eq!(Rgb::new(0x7E, 0x7E, 0x7E).adjust_brightness(100).to_hex(), "#E2E2E2");
}

#[test]
fn complementary_and_triadic_scenarios() {
    let palette = generate_from_tag("#FF0000", "complementary").unwrap();
    assert_eq!(palette[0].to_hex(), "#FF0000");
    assert_eq!(palette[1].to_hex(), "#00FFFF");
    assert_eq!(palette[7].to_hex(), "#CD0000");

    let palette = generate_from_tag("#FF0000", "triadic").unwrap();
    let hues: Vec<_> = palette[..3].iter().map(|c| c.to_hsl().hue).collect();
    assert_abs_diff_eq!(hues[0], 0.0, epsilon = 0.5);
    assert_abs_diff_eq!(hues[1], 120.0, epsilon = 0.5);
    assert_abs_diff_eq!(hues[2], 240.0, epsilon = 0.5);
}

#[test]
fn suggestion_never_loses_contrast() {
    let references = [Rgb::WHITE, Rgb::BLACK, Rgb::new(0x77, 0x77, 0x77), Rgb::new(0x33, 0x66, 0x99)];
    for reference in references {
        for candidate in grid().step_by(53) {
            let original = contrast_ratio(reference, candidate);
            let suggestion = suggest_accessible_color(reference, candidate);
            let ratio = contrast_ratio(reference, suggestion);
            assert!(ratio >= original, "{candidate} on {reference} became {suggestion}");
            if passes_aa(original) {
                assert_eq!(suggestion, candidate);
            }
        }
    }
}
