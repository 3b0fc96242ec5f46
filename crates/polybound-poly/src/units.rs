//! Angle and decibel conversions

use num_traits::Float;

#[inline]
fn lit<T: From<f32>>(v: f32) -> T {
    T::from(v)
}

/// Radians to degrees
pub fn rad2deg<T: Float>(x: T) -> T {
    x.to_degrees()
}

/// Degrees to radians
pub fn deg2rad<T: Float>(x: T) -> T {
    x.to_radians()
}

/// Power ratio to decibels, `10 * log10(x)`
pub fn pow2db<T: Float + From<f32>>(x: T) -> T {
    lit::<T>(10.0) * x.log10()
}

/// Decibels to power ratio, `10^(x / 10)`
pub fn db2pow<T: Float + From<f32>>(x: T) -> T {
    lit::<T>(10.0).powf(x / lit(10.0))
}

/// Magnitude ratio to decibels, `20 * log10(x)`
pub fn mag2db<T: Float + From<f32>>(x: T) -> T {
    lit::<T>(20.0) * x.log10()
}

/// Decibels to magnitude ratio, `10^(x / 20)`
pub fn db2mag<T: Float + From<f32>>(x: T) -> T {
    lit::<T>(10.0).powf(x / lit(20.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_angles() {
        assert_relative_eq!(rad2deg(PI), 180.0, epsilon = 1e-12);
        assert_relative_eq!(deg2rad(90.0), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(rad2deg(deg2rad(37.5_f32)), 37.5, epsilon = 1e-4);
    }

    #[test]
    fn test_decibels() {
        assert_relative_eq!(pow2db(1.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(pow2db(100.0), 20.0, epsilon = 1e-12);
        assert_relative_eq!(db2pow(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(db2pow(20.0), 100.0, epsilon = 1e-12);
        assert_relative_eq!(mag2db(1.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(mag2db(10.0), 20.0, epsilon = 1e-12);
        assert_relative_eq!(db2mag(0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(db2mag(20.0), 10.0, epsilon = 1e-12);
    }
}
