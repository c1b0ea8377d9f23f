//! Procedural orbit positions for the animated background circles.
//!
//! Each orbit index gets its own angular speed (slower for larger indices)
//! and every third orbit runs backwards. The radial distance is jittered by a
//! fresh random factor on every sample, so positions shimmer from frame to frame.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::rng::UnitRandom;

/// Constants shaping the orbit field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitParams {
    /// Radius divisor for index 0.
    pub radius_base: f64,
    /// Radius divisor growth per index.
    pub radius_step: f64,
    /// Added to elapsed time before dividing.
    pub time_offset_ms: f64,
    /// Final divisor applied to the angle input.
    pub time_divisor: f64,
    /// Maximum distance from the world origin on each axis.
    pub amplitude: f64,
    /// Orbits whose index is a multiple of this run in reverse.
    pub reverse_every: u32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            radius_base: 200.0,
            radius_step: 100.0,
            time_offset_ms: 987_654.0,
            time_divisor: 10.0,
            amplitude: 300.0,
            reverse_every: 3,
        }
    }
}

impl OrbitParams {
    pub fn orbit_radius(&self, index: u32) -> f64 {
        index as f64 * self.radius_step + self.radius_base
    }

    /// Angle fed to sin/cos for `index` at `elapsed_ms`, sign included.
    pub fn orbit_input(&self, index: u32, elapsed_ms: f64) -> f64 {
        let input = ((elapsed_ms + self.time_offset_ms) / self.orbit_radius(index)) / self.time_divisor;
        if self.reverse_every != 0 && index % self.reverse_every == 0 {
            -input
        } else {
            input
        }
    }

    /// World position of orbit `index`. Draws two samples from `rng`, x first.
    pub fn position(&self, index: u32, elapsed_ms: f64, rng: &mut impl UnitRandom) -> DVec2 {
        let input = self.orbit_input(index, elapsed_ms);
        let x = input.sin() * rng.next_unit() * self.amplitude;
        let y = input.cos() * rng.next_unit() * self.amplitude;
        DVec2::new(x, y)
    }

    /// Sample orbits `0..count` in index order, replacing the contents of `out`.
    pub fn sample_into(
        &self,
        count: u32,
        elapsed_ms: f64,
        rng: &mut impl UnitRandom,
        out: &mut Vec<DVec2>,
    ) {
        out.clear();
        out.reserve(count as usize);
        out.extend((0..count).map(|i| self.position(i, elapsed_ms, rng)));
    }
}

/// Orbit angle input with the default constants.
pub fn orbit_input(index: u32, elapsed_ms: f64) -> f64 {
    OrbitParams::default().orbit_input(index, elapsed_ms)
}

/// Orbit position with the default constants.
pub fn orbit_position(index: u32, elapsed_ms: f64, rng: &mut impl UnitRandom) -> DVec2 {
    OrbitParams::default().position(index, elapsed_ms, rng)
}

/// Positions for orbits `0..count` with the default constants.
pub fn sample_orbits(count: u32, elapsed_ms: f64, rng: &mut impl UnitRandom) -> Vec<DVec2> {
    let mut out = Vec::new();
    OrbitParams::default().sample_into(count, elapsed_ms, rng, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::rng::Rng;

    /// Replays a fixed sequence of samples.
    struct Scripted {
        values: Vec<f64>,
        cursor: usize,
    }

    impl Scripted {
        fn new(values: &[f64]) -> Self {
            Self { values: values.to_vec(), cursor: 0 }
        }
    }

    impl UnitRandom for Scripted {
        fn next_unit(&mut self) -> f64 {
            let v = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            v
        }
    }

    #[test]
    fn index_zero_uses_base_radius_and_runs_backwards() {
        let t = 1234.0;
        let expected = -((t + 987_654.0) / 200.0) / 10.0;
        assert_eq!(orbit_input(0, t), expected);
    }

    #[test]
    fn radius_grows_per_index() {
        let params = OrbitParams::default();
        assert_eq!(params.orbit_radius(0), 200.0);
        assert_eq!(params.orbit_radius(1), 300.0);
        assert_eq!(params.orbit_radius(9_999), 1_000_100.0);
    }

    #[test]
    fn every_third_orbit_is_reversed() {
        let t = 50.0;
        assert!(orbit_input(0, t) < 0.0);
        assert!(orbit_input(1, t) > 0.0);
        assert!(orbit_input(2, t) > 0.0);
        assert!(orbit_input(3, t) < 0.0);
        assert!(orbit_input(6, t) < 0.0);
    }

    #[test]
    fn position_uses_sin_for_x_and_cos_for_y() {
        let t = 0.0;
        let mut rng = Scripted::new(&[0.5, 0.25]);
        let p = orbit_position(1, t, &mut rng);
        let input = orbit_input(1, t);
        assert!((p.x - input.sin() * 0.5 * 300.0).abs() < 1e-12);
        assert!((p.y - input.cos() * 0.25 * 300.0).abs() < 1e-12);
    }

    #[test]
    fn zero_random_factor_collapses_to_origin() {
        let mut rng = Scripted::new(&[0.0]);
        assert_eq!(orbit_position(17, 999.0, &mut rng).length(), 0.0);
    }

    #[test]
    fn positions_are_bounded_by_amplitude() {
        let mut rng = Rng::new(99);
        for t in [0.0, 16.7, 1e6, 3.3e9] {
            for p in sample_orbits(2_000, t, &mut rng) {
                assert!(p.x.abs() <= 300.0 && p.y.abs() <= 300.0, "{p:?}");
            }
        }
    }

    #[test]
    fn each_sample_consumes_two_draws() {
        let mut a = Rng::new(5);
        let mut b = Rng::new(5);
        let _ = sample_orbits(10, 0.0, &mut a);
        for _ in 0..20 {
            b.next_unit();
        }
        assert_eq!(a.next_unit(), b.next_unit());
    }

    #[test]
    fn sample_into_reuses_buffer() {
        let params = OrbitParams::default();
        let mut rng = Rng::new(1);
        let mut out = vec![DVec2::splat(1.0); 3];
        params.sample_into(5, 10.0, &mut rng, &mut out);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn disabled_reversal_keeps_all_forward() {
        let params = OrbitParams { reverse_every: 0, ..OrbitParams::default() };
        assert!(params.orbit_input(0, 0.0) > 0.0);
        assert!(params.orbit_input(3, 0.0) > 0.0);
    }
}
