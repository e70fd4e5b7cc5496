// Classifier tests over synthetic hand skeletons.

use evergreen_core::*;
use glam::Vec3;

const WRIST_POS: Vec3 = Vec3::new(0.5, 0.8, 0.0);

/// Hand with the four fingertips `spread` from the wrist and the thumb tip
/// `pinch` away from the index tip. Every other landmark sits on the wrist.
fn hand(pinch: f32, spread: f32) -> LandmarkFrame {
    let mut points = [WRIST_POS; LANDMARK_COUNT];
    for (i, &tip) in FINGERTIPS.iter().enumerate() {
        let angle = (-30.0 + 20.0 * i as f32).to_radians();
        points[tip] = WRIST_POS + Vec3::new(angle.sin(), -angle.cos(), 0.0) * spread;
    }
    points[THUMB_TIP] = points[INDEX_TIP] + Vec3::new(-pinch, 0.0, 0.0);
    LandmarkFrame::new(points)
}

#[test]
fn measurements_match_construction() {
    let frame = hand(0.2, 0.3);
    assert!((frame.pinch_distance() - 0.2).abs() < 1e-5);
    assert!((frame.spread() - 0.3).abs() < 1e-5);
}

#[test]
fn pinch_wins_regardless_of_spread() {
    for spread in [0.05, 0.1, 0.3, 0.5, 0.8] {
        assert_eq!(classify(&hand(0.02, spread)), Gesture::Pinch, "spread {spread}");
    }
}

#[test]
fn wide_spread_without_pinch_is_open() {
    for spread in [0.41, 0.5, 0.7] {
        assert_eq!(classify(&hand(0.2, spread)), Gesture::Open, "spread {spread}");
    }
}

#[test]
fn tight_spread_without_pinch_is_fist() {
    for spread in [0.05, 0.15, 0.24] {
        assert_eq!(classify(&hand(0.3, spread)), Gesture::Fist, "spread {spread}");
    }
}

#[test]
fn middle_spread_is_ambiguous() {
    for spread in [0.26, 0.3, 0.39] {
        assert_eq!(classify(&hand(0.3, spread)), Gesture::None, "spread {spread}");
    }
}

#[test]
fn pinch_threshold_is_exclusive_of_larger_distances() {
    assert_eq!(classify(&hand(0.049, 0.3)), Gesture::Pinch);
    assert_eq!(classify(&hand(0.06, 0.3)), Gesture::None);
}

/// Axis-aligned hand: wrist at the origin, every fingertip straight up at
/// `spread` and the thumb `pinch` to the right of the index tip, so both
/// measurements are exact in f32.
fn aligned_hand(pinch: f32, spread: f32) -> LandmarkFrame {
    let mut points = [Vec3::ZERO; LANDMARK_COUNT];
    for &tip in FINGERTIPS.iter() {
        points[tip] = Vec3::new(0.0, spread, 0.0);
    }
    points[THUMB_TIP] = Vec3::new(pinch, spread, 0.0);
    LandmarkFrame::new(points)
}

#[test]
fn thresholds_at_exact_boundaries() {
    let t = GestureThresholds::default();

    // Pinch is strictly below its threshold; Open includes its threshold
    let frame = aligned_hand(t.pinch, t.open_spread);
    assert_eq!(frame.pinch_distance(), 0.05);
    assert_eq!(frame.spread(), 0.4);
    assert_eq!(t.classify(&frame), Gesture::Open);

    // Fist is strictly below its threshold
    let frame = aligned_hand(0.25, t.fist_spread);
    assert_eq!(frame.spread(), 0.25);
    assert_eq!(t.classify(&frame), Gesture::None);
}

#[test]
fn depth_is_ignored() {
    let flat = hand(0.2, 0.5);
    let mut points = *flat.points();
    for p in points.iter_mut() {
        p.z = 3.0 * p.x - 1.0;
    }
    let deep = LandmarkFrame::new(points);
    assert_eq!(classify(&flat), classify(&deep));
    assert!((flat.spread() - deep.spread()).abs() < 1e-6);
}

#[test]
fn custom_thresholds_shift_the_decision() {
    let loose = GestureThresholds {
        pinch: 0.1,
        fist_spread: 0.35,
        open_spread: 0.6,
    };
    assert!(loose.validate().is_ok());
    assert_eq!(loose.classify(&hand(0.08, 0.5)), Gesture::Pinch);
    assert_eq!(loose.classify(&hand(0.2, 0.3)), Gesture::Fist);
    assert_eq!(loose.classify(&hand(0.2, 0.5)), Gesture::None);
}

#[test]
fn read_separates_no_hand_from_ambiguous_hand() {
    let thresholds = GestureThresholds::default();
    let none = thresholds.read(None);
    assert_eq!(none, HandReading::NoHand);
    assert!(!none.is_detected());
    assert_eq!(none.gesture(), None);

    let ambiguous = thresholds.read(Some(&hand(0.3, 0.3)));
    assert_eq!(ambiguous, HandReading::Hand(Gesture::None));
    assert!(ambiguous.is_detected());
    assert_eq!(ambiguous.gesture(), Some(Gesture::None));
}

#[test]
fn from_slice_rejects_malformed_samples() {
    let short = vec![Vec3::ZERO; 20];
    assert_eq!(
        LandmarkFrame::from_slice(&short),
        Err(LandmarkError::WrongCount {
            expected: 21,
            actual: 20
        })
    );

    let mut bad = vec![Vec3::ZERO; LANDMARK_COUNT];
    bad[7] = Vec3::new(f32::NAN, 0.0, 0.0);
    assert_eq!(
        LandmarkFrame::from_slice(&bad),
        Err(LandmarkError::NotFinite { index: 7 })
    );

    let good = hand(0.2, 0.3);
    let rebuilt = LandmarkFrame::from_slice(good.points()).unwrap();
    assert_eq!(rebuilt, good);
}

#[test]
fn thresholds_validate_ordering_and_sign() {
    assert!(GestureThresholds::default().validate().is_ok());

    let inverted = GestureThresholds {
        fist_spread: 0.5,
        open_spread: 0.4,
        ..GestureThresholds::default()
    };
    assert!(matches!(
        inverted.validate(),
        Err(ConfigError::EmptyRange { .. })
    ));

    let negative = GestureThresholds {
        pinch: -0.01,
        ..GestureThresholds::default()
    };
    assert!(matches!(
        negative.validate(),
        Err(ConfigError::NotPositive { name: "gesture.pinch", .. })
    ));
}
