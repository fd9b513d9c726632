#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    #[must_use]
    pub const fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }

    /// Builds a colour from unit-interval channels, clamping each to `[0, 1]`
    /// and rounding to the nearest byte. NaN maps to 0.
    #[must_use]
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: unit_to_byte(r),
            g: unit_to_byte(g),
            b: unit_to_byte(b),
        }
    }

    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Colour {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

fn unit_to_byte(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unit_rgb_extremes() {
        assert_eq!(Colour::from_unit_rgb(0.0, 0.0, 0.0), Colour::BLACK);
        assert_eq!(Colour::from_unit_rgb(1.0, 1.0, 1.0), Colour::WHITE);
    }

    #[test]
    fn test_from_unit_rgb_clamps_out_of_range() {
        assert_eq!(Colour::from_unit_rgb(-4.0, 7.5, 1.0001), Colour { r: 0, g: 255, b: 255 });
    }

    #[test]
    fn test_from_unit_rgb_rounds_to_nearest() {
        // 0.5 * 255 = 127.5 rounds away from zero
        assert_eq!(Colour::from_unit_rgb(0.5, 0.5, 0.5), Colour::grey(128));
    }

    #[test]
    fn test_from_unit_rgb_nan_is_black() {
        assert_eq!(Colour::from_unit_rgb(f64::NAN, 0.0, 0.0), Colour::BLACK);
    }

    #[test]
    fn test_array_conversions() {
        let colour = Colour::from([1, 2, 3]);
        assert_eq!(colour.to_array(), [1, 2, 3]);
    }
}
