//! Coherent noise sampling for the terrain and scatter layers.

use noise::{NoiseFn, Perlin};
use rand::Rng;

use crate::field::ScalarField;

/// Offsets are drawn from this range on both axes to stay clear of the
/// lattice origin, where Perlin noise is visibly regular.
pub const OFFSET_RANGE: f32 = 10_000.0;

const PERLIN_SEED: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseOffset {
    pub x: f32,
    pub y: f32,
}

impl NoiseOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            x: rng.gen_range(-OFFSET_RANGE..OFFSET_RANGE),
            y: rng.gen_range(-OFFSET_RANGE..OFFSET_RANGE),
        }
    }
}

/// Perlin noise sampled at `(x * scale + offset.x, y * scale + offset.y)`,
/// remapped to `[0, 1]`.
#[derive(Clone)]
pub struct NoiseField {
    perlin: Perlin,
    scale: f32,
    offset: NoiseOffset,
}

impl NoiseField {
    pub fn new(scale: f32, offset: NoiseOffset) -> Self {
        Self {
            perlin: Perlin::new(PERLIN_SEED),
            scale,
            offset,
        }
    }

    pub fn offset(&self) -> NoiseOffset {
        self.offset
    }

    pub fn sample(&self, x: u32, y: u32) -> f32 {
        let px = x as f64 * self.scale as f64 + self.offset.x as f64;
        let py = y as f64 * self.scale as f64 + self.offset.y as f64;
        let raw = self.perlin.get([px, py]);
        ((raw * 0.5 + 0.5) as f32).clamp(0.0, 1.0)
    }

    pub fn build(&self, size: u32) -> ScalarField {
        ScalarField::from_fn(size, |x, y| self.sample(x, y))
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn sampling_is_deterministic() {
        let field = NoiseField::new(0.1, NoiseOffset::new(1234.5, -987.25));
        for (x, y) in [(0, 0), (3, 7), (42, 17)] {
            assert_eq!(field.sample(x, y), field.sample(x, y));
        }
        assert_eq!(field.build(8), field.build(8));
    }

    #[test]
    fn values_stay_in_unit_range() {
        let mut rng = SmallRng::seed_from_u64(11);
        let field = NoiseField::new(0.37, NoiseOffset::random(&mut rng)).build(32);
        let (min_v, max_v) = field.min_max();
        assert!(min_v >= 0.0);
        assert!(max_v <= 1.0);
        assert!(max_v > min_v, "noise field should not be flat");
    }

    #[test]
    fn neighbouring_cells_are_correlated() {
        let field = NoiseField::new(0.05, NoiseOffset::new(321.7, 654.3)).build(32);
        let mut max_step = 0.0f32;
        for y in 0..32 {
            for x in 0..31 {
                max_step = max_step.max((field.sample(x, y) - field.sample(x + 1, y)).abs());
            }
        }
        assert!(max_step < 0.2, "adjacent samples jumped by {max_step}");
    }

    #[test]
    fn offsets_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..64 {
            let offset = NoiseOffset::random(&mut rng);
            assert!(offset.x.abs() <= OFFSET_RANGE);
            assert!(offset.y.abs() <= OFFSET_RANGE);
        }
    }
}
