use crate::core::actions::render::ports::colour_map::ColourMap;
use crate::core::actions::render::ports::fractal_algorithm::{FractalAlgorithm, IterationResult};
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::util::map_coordinate::{MapCoordinateError, map_coordinate};

/// Computes the colours of row `y` of a `size`×`size` render of `viewport`.
///
/// The y coordinate is mapped once for the whole row, the x coordinate once
/// per pixel.
pub fn compute_row<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
    viewport: Viewport,
    size: u32,
    y: u32,
) -> Result<Vec<Colour>, MapCoordinateError>
where
    Alg: FractalAlgorithm + ?Sized,
    CMap: ColourMap<IterationResult> + ?Sized,
{
    let (x_min, x_max) = viewport.x_range();
    let (y_min, y_max) = viewport.y_range();
    let imag = map_coordinate(y_min, y_max, size, y)?;

    let mut row = Vec::with_capacity(size as usize);

    for x in 0..size {
        let real = map_coordinate(x_min, x_max, size, x)?;
        let iterations = algorithm.iterate(Complex { real, imag });
        row.push(colour_map.map(iterations));
    }

    Ok(row)
}
