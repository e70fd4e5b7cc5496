// Fairy-light flicker bounds and bookkeeping.

use std::f32::consts::TAU;

use evergreen_core::*;
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn flicker_stays_within_band() {
    let base = 1.8;
    for i in 0..400 {
        let time = i as f32 * 0.137;
        for j in 0..16 {
            let phase = j as f32 / 16.0 * TAU;
            let v = flicker(base, time, phase);
            assert!(v >= 0.4 * base - 1e-5 && v <= 1.2 * base + 1e-5, "{v} at t={time}");
        }
    }
}

#[test]
fn flicker_is_centered_on_eighty_percent() {
    let base = 2.0;
    assert!((flicker(base, 0.0, 0.0) - 1.6).abs() < 1e-6);
    assert!((flicker(base, std::f32::consts::FRAC_PI_2, 0.0) - 2.4).abs() < 1e-5);
}

#[test]
fn animator_updates_every_light_in_band() {
    let config = FairyConfig {
        count: 50,
        ..FairyConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(3);
    let mut fairy = FairyLightAnimator::new(&config);
    for i in 0..config.count {
        fairy.add(ParticleId(i as u32), &mut rng);
    }
    assert_eq!(fairy.lights().len(), 50);

    let base = fairy.base_intensity();
    for step in 0..200 {
        fairy.update(step as f32 * 0.05);
        for light in fairy.lights() {
            assert!(light.intensity >= 0.4 * base - 1e-5);
            assert!(light.intensity <= 1.2 * base + 1e-5);
        }
    }
}

#[test]
fn lights_get_phase_and_palette_colour() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut fairy = FairyLightAnimator::new(&FairyConfig::default());
    for i in 0..64 {
        fairy.add(ParticleId(i), &mut rng);
    }
    for light in fairy.lights() {
        assert!((0.0..TAU).contains(&light.phase));
        assert!(light.color_rgb == FAIRY_RED || light.color_rgb == FAIRY_YELLOW);
        assert_eq!(light.intensity, fairy.base_intensity());
    }
    // Phases differ so the garland does not pulse in unison
    let first = fairy.lights()[0].phase;
    assert!(fairy.lights().iter().any(|l| (l.phase - first).abs() > 0.1));
}

#[test]
fn light_for_finds_by_particle() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut fairy = FairyLightAnimator::new(&FairyConfig::default());
    fairy.add(ParticleId(5), &mut rng);
    fairy.add(ParticleId(9), &mut rng);
    assert_eq!(fairy.light_for(ParticleId(9)).map(|l| l.particle), Some(ParticleId(9)));
    assert!(fairy.light_for(ParticleId(6)).is_none());
}

#[test]
fn validate_rejects_non_positive_base() {
    assert!(FairyConfig::default().validate().is_ok());
    let dark = FairyConfig {
        base_intensity: 0.0,
        ..FairyConfig::default()
    };
    assert!(dark.validate().is_err());
}

#[test]
fn validate_requires_finite_positive_flicker_rate() {
    for rate in [0.0, -3.0, f32::NAN, f32::INFINITY] {
        let config = FairyConfig {
            flicker_rate: rate,
            ..FairyConfig::default()
        };
        assert!(
            matches!(
                config.validate(),
                Err(ConfigError::NotPositive { name: "fairy.flicker_rate", .. })
            ),
            "rate {rate}"
        );
    }
}
