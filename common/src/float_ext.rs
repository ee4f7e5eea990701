/// Tolerance-based comparisons for floating point values.
pub trait FloatExt: Copy {
    /// Absolute comparison against [`crate::EPSILON`].
    fn approximately_eq(self, other: Self) -> bool;

    /// `|self - other| <= tolerance`.
    fn within(self, other: Self, tolerance: Self) -> bool;

    /// `|self - other| <= fraction * |other|`, with `other` as the reference value.
    fn within_fraction_of(self, other: Self, fraction: Self) -> bool;
}

impl FloatExt for f32 {
    fn approximately_eq(self, other: Self) -> bool {
        self.within(other, crate::EPSILON as f32)
    }

    fn within(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() <= tolerance
    }

    fn within_fraction_of(self, other: Self, fraction: Self) -> bool {
        self.within(other, fraction * other.abs())
    }
}

impl FloatExt for f64 {
    fn approximately_eq(self, other: Self) -> bool {
        self.within(other, crate::EPSILON)
    }

    fn within(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() <= tolerance
    }

    fn within_fraction_of(self, other: Self, fraction: Self) -> bool {
        self.within(other, fraction * other.abs())
    }
}
