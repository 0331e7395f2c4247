use frame_scenes::core::damped::{approach, frame_rate_independent, DampedProperty};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod damped_tests {
    use super::*;

    #[test]
    fn test_distance_strictly_decreases_and_converges() {
        let mut rng = StdRng::seed_from_u64(0xda3bed);

        for _ in 0..500 {
            let target: f32 = rng.random_range(-100.0..100.0);
            let offset: f32 = rng.random_range(1.0..100.0) * if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            let v0 = target + offset;
            let alpha = 0.1;

            let mut v = v0;
            let mut last = (v - target).abs();
            for _ in 0..50 {
                v = approach(v, target, alpha);
                let distance = (v - target).abs();
                assert!(distance < last, "v0={v0} target={target}: {distance} !< {last}");
                last = distance;
            }

            assert!(
                last <= 0.01 * offset.abs(),
                "v0={v0} target={target}: still {last} away after 50 steps"
            );
        }
    }

    #[test]
    fn test_never_overshoots_from_one_side() {
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..200 {
            let target: f32 = rng.random_range(-10.0..10.0);
            let alpha: f32 = rng.random_range(0.01..=0.9);
            let mut v = target - rng.random_range(0.1..10.0);

            for _ in 0..100 {
                v = v.approach(target, alpha);
                assert!(v <= target, "overshot: v={v} target={target} alpha={alpha}");
            }
        }
    }

    #[test]
    fn test_alpha_one_snaps() {
        assert_eq!(approach(-3.0_f32, 8.0, 1.0), 8.0);
        assert_eq!(approach(Vec3::ZERO, Vec3::ONE, 1.0), Vec3::ONE);
    }

    #[test]
    fn test_vector_axes_converge_together() {
        let target = Vec3::new(1.3, 1.3, 1.3);
        let mut scale = Vec3::ONE;
        for _ in 0..100 {
            scale = scale.approach(target, 0.1);
        }
        assert!((scale - target).abs().max_element() < 1e-3);
        assert_eq!(scale.x, scale.y);
        assert_eq!(scale.y, scale.z);
    }

    #[test]
    fn test_frame_rate_independent_factor() {
        // At the reference rate the factor is unchanged
        assert!((frame_rate_independent(0.1, 1.0 / 60.0, 60.0) - 0.1).abs() < 1e-5);
        // Zero-length frames do not move
        assert_eq!(frame_rate_independent(0.1, 0.0, 60.0), 0.0);
        // Slower frames close more distance
        assert!(frame_rate_independent(0.1, 1.0 / 30.0, 60.0) > 0.1);
    }
}
