/// HSL to RGB with the hue in degrees, the way CSS `hsl()` reads
pub fn hsl_to_rgb(hue_degrees: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = hue_degrees.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = l - c * 0.5;

    let (r, g, b) = match h_prime as i32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [r + m, g + m, b + m]
}

/// Unpack a `0xRRGGBB` literal into RGB floats
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    [channel(16), channel(8), channel(0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 0.01)
    }

    #[test]
    fn test_hsl_primaries() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
        assert!(close(hsl_to_rgb(120.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
        assert!(close(hsl_to_rgb(240.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_hsl_wraps_full_turn() {
        assert!(close(hsl_to_rgb(360.0, 0.7, 0.6), hsl_to_rgb(0.0, 0.7, 0.6)));
    }

    #[test]
    fn test_hsl_stays_in_unit_range() {
        for step in 0..72 {
            let rgb = hsl_to_rgb(step as f32 * 5.0, 0.7, 0.6);
            assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)), "{:?}", rgb);
        }
    }

    #[test]
    fn test_hex_rgb() {
        assert!(close(hex_rgb(0x22c55e), [0.133, 0.773, 0.369]));
        assert_eq!(hex_rgb(0xffffff), [1.0, 1.0, 1.0]);
        assert_eq!(hex_rgb(0x000000), [0.0, 0.0, 0.0]);
    }
}
