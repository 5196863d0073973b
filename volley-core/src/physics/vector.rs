//! Discrete velocity rotation
//!
//! The ball only ever turns by one of six angles. Each angle carries a
//! precomputed (cos, sin) pair scaled by 1000, so rotation is pure integer
//! arithmetic and needs no FPU.

use core::ops::Neg;

/// Fixed-point scale of the trig table
pub const TRIG_SCALE: i32 = 1000;

/// Integer velocity or displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Vector2 {
    pub dx: i32,
    pub dy: i32,
}

impl Vector2 {
    /// The zero vector
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub const fn is_zero(&self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

/// Rotation sense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

/// One of the six supported rotation angles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AngleBucket {
    Deg15,
    Deg30,
    Deg45,
    Deg60,
    Deg75,
    Deg90,
}

impl AngleBucket {
    /// Snap an arbitrary request to the nearest bucket
    ///
    /// Thresholds sit halfway between buckets; anything at or below 22
    /// (including zero and negative requests) becomes 15.
    pub const fn snap(degrees: i32) -> Self {
        match degrees {
            i32::MIN..=22 => Self::Deg15,
            23..=37 => Self::Deg30,
            38..=52 => Self::Deg45,
            53..=67 => Self::Deg60,
            68..=82 => Self::Deg75,
            _ => Self::Deg90,
        }
    }

    /// Angle in whole degrees
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Deg15 => 15,
            Self::Deg30 => 30,
            Self::Deg45 => 45,
            Self::Deg60 => 60,
            Self::Deg75 => 75,
            Self::Deg90 => 90,
        }
    }

    /// (cos, sin) scaled by [`TRIG_SCALE`]
    pub const fn cos_sin(self) -> (i32, i32) {
        match self {
            Self::Deg15 => (965, 262),
            Self::Deg30 => (866, 500),
            Self::Deg45 => (707, 707),
            Self::Deg60 => (500, 866),
            Self::Deg75 => (259, 966),
            Self::Deg90 => (0, TRIG_SCALE),
        }
    }
}

/// Divide a table product back to pixels, rounding half away from zero
const fn descale(value: i32) -> i32 {
    if value >= 0 {
        (value + TRIG_SCALE / 2) / TRIG_SCALE
    } else {
        (value - TRIG_SCALE / 2) / TRIG_SCALE
    }
}

/// Counter-clockwise rotation by a bucket
///
/// Both outputs are computed from the same input snapshot.
fn rotate_ccw(v: Vector2, bucket: AngleBucket) -> Vector2 {
    let Vector2 { dx, dy } = v;

    if let AngleBucket::Deg90 = bucket {
        return Vector2::new(-dy, dx);
    }

    let (cos, sin) = bucket.cos_sin();
    Vector2::new(descale(dx * cos - dy * sin), descale(dx * sin + dy * cos))
}

/// Rotate `v` by `degrees`, snapped to the nearest bucket
///
/// Clockwise rotation is the counter-clockwise result with `dy` negated.
/// A non-zero input never produces the zero vector: if rounding collapses
/// the result, the input is returned with `dy` negated instead.
pub fn rotate(v: Vector2, degrees: i32, direction: Rotation) -> Vector2 {
    let bucket = AngleBucket::snap(degrees);
    let mut out = rotate_ccw(v, bucket);

    if let Rotation::Clockwise = direction {
        out.dy = -out.dy;
    }

    if out.is_zero() && !v.is_zero() {
        return Vector2::new(v.dx, -v.dy);
    }

    out
}
