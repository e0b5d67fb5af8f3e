use crate::field::ScalarField;

const FALLOFF_STEEPNESS: f32 = 3.0;
const FALLOFF_SHIFT: f32 = 2.2;

/// Square falloff value for one cell: 0 at the centre, 1 at the low border.
///
/// Distance from the centre is the Chebyshev norm of the cell's normalised
/// coordinates, so the island comes out square rather than round. The curve
/// `v³ / (v³ + (2.2 - 2.2v)³)` keeps the interior flat and sharpens only near
/// the edges.
pub fn falloff_value(x: u32, y: u32, size: u32) -> f32 {
    let xv = x as f32 / size as f32 * 2.0 - 1.0;
    let yv = y as f32 / size as f32 * 2.0 - 1.0;
    let v = xv.abs().max(yv.abs());
    let rise = v.powf(FALLOFF_STEEPNESS);
    let fall = (FALLOFF_SHIFT - FALLOFF_SHIFT * v).powf(FALLOFF_STEEPNESS);
    rise / (rise + fall)
}

pub fn build_falloff_field(size: u32) -> ScalarField {
    ScalarField::from_fn(size, |x, y| falloff_value(x, y, size))
}
