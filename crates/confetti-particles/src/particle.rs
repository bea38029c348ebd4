//! Fixed-field particle records and the reset path that (re)spawns them

use confetti_core::{Rgba, PALETTE};

use crate::rand::ConfettiRng;

/// One confetti flake.
///
/// Every field is always initialized; particles only come into existence
/// through [`Particle::spawn`] and only change shape through
/// [`Particle::reset`], so no partially-built record is ever observable.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Primary stroke color
    pub color: Rgba,
    /// Secondary stroke color, used only for gradient strokes
    pub color2: Rgba,
    /// Position in surface coordinates; `y` is negative at spawn
    pub x: f64,
    pub y: f64,
    /// Stroke width, in [5, 15)
    pub diameter: f64,
    /// Current lateral stroke offset, rewritten from `tilt_angle` each frame
    pub tilt: f64,
    /// Per-frame increment applied to `tilt_angle`, in [0.05, 0.12)
    pub tilt_angle_increment: f64,
    /// Phase accumulator for the tilt oscillation, starts in [0, π)
    pub tilt_angle: f64,
}

impl Particle {
    /// Create a fresh particle above the visible area of a
    /// `width x height` surface.
    pub fn spawn(rng: &mut ConfettiRng, width: f64, height: f64, alpha: f64) -> Self {
        let mut particle = Self {
            color: Rgba::new(0, 0, 0, alpha),
            color2: Rgba::new(0, 0, 0, alpha),
            x: 0.0,
            y: 0.0,
            diameter: 5.0,
            tilt: 0.0,
            tilt_angle_increment: 0.05,
            tilt_angle: 0.0,
        };
        particle.reset(rng, width, height, alpha);
        particle
    }

    /// Re-randomize every attribute, placing the particle above the visible
    /// area (`y` in `[-height, 0)`) so it falls back into view. Also used to
    /// recycle an out-of-bounds particle in place.
    pub fn reset(&mut self, rng: &mut ConfettiRng, width: f64, height: f64, alpha: f64) {
        self.color = Rgba::from_palette(rng.index(PALETTE.len()), alpha);
        self.color2 = Rgba::from_palette(rng.index(PALETTE.len()), alpha);
        self.x = rng.range(0.0, width);
        self.y = rng.range(0.0, height) - height;
        self.diameter = rng.range(5.0, 15.0);
        // Placeholder until the first update derives tilt from tilt_angle
        self.tilt = rng.range(-10.0, 0.0);
        self.tilt_angle_increment = rng.range(0.05, 0.12);
        self.tilt_angle = rng.range(0.0, std::f64::consts::PI);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_attributes_stay_in_documented_ranges() {
        let mut rng = ConfettiRng::new(42);
        let (width, height) = (800.0, 600.0);
        for _ in 0..1000 {
            let p = Particle::spawn(&mut rng, width, height, 1.0);
            assert!(p.diameter >= 5.0 && p.diameter < 15.0);
            assert!(p.tilt_angle >= 0.0 && p.tilt_angle < std::f64::consts::PI);
            assert!(p.tilt_angle_increment >= 0.05 && p.tilt_angle_increment < 0.12);
            assert!(p.x >= 0.0 && p.x < width);
            assert!(p.y >= -height && p.y < 0.0);
        }
    }

    #[test]
    fn spawn_bakes_alpha_into_both_colors() {
        let mut rng = ConfettiRng::new(7);
        let p = Particle::spawn(&mut rng, 100.0, 100.0, 0.4);
        assert!((p.color.a - 0.4).abs() < 1e-12);
        assert!((p.color2.a - 0.4).abs() < 1e-12);
    }

    #[test]
    fn reset_reuses_the_record_in_place() {
        let mut rng = ConfettiRng::new(9);
        let mut p = Particle::spawn(&mut rng, 100.0, 100.0, 1.0);
        p.x = 500.0;
        p.y = 500.0;
        p.reset(&mut rng, 100.0, 100.0, 1.0);
        assert!(p.x < 100.0);
        assert!(p.y < 0.0);
    }
}
