/// Square grid of `f32` samples, row-major (`y * size + x`).
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    pub size: u32,
    values: Vec<f32>,
}

impl ScalarField {
    pub fn new(size: u32, values: Vec<f32>) -> Self {
        debug_assert_eq!(values.len(), (size as usize) * (size as usize));
        Self { size, values }
    }

    /// Build a field by evaluating `f(x, y)` for every cell in row order.
    pub fn from_fn(size: u32, mut f: impl FnMut(u32, u32) -> f32) -> Self {
        let mut values = Vec::with_capacity((size as usize) * (size as usize));
        for y in 0..size {
            for x in 0..size {
                values.push(f(x, y));
            }
        }
        Self { size, values }
    }

    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.size && y < self.size);
        let idx = (y * self.size + x) as usize;
        self.values[idx]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn min_max(&self) -> (f32, f32) {
        let mut min_v = f32::MAX;
        let mut max_v = f32::MIN;
        for &v in &self.values {
            min_v = min_v.min(v);
            max_v = max_v.max(v);
        }
        (min_v, max_v)
    }
}
