use crate::domain::*;
use crate::harness::HarnessError;
use crate::util::*;

/// One pixel per cell, x is the column and y the row.
/// Values are clamped to `[0, 1]` before the color map.
pub fn grid_to_image<F: GridFloat>(grid: &Grid<F>) -> ::image::RgbImage {
    let n = grid.size() as u32;
    let gradient = colorous::TURBO;
    let mut img = ::image::RgbImage::new(n, n);
    for coord in grid.aabb().coord_iter() {
        let r = grid.view(&coord).as_f64().clamp(0.0, 1.0);
        let c = gradient.eval_continuous(r);
        let pixel = ::image::Rgb(c.as_array());
        img.put_pixel(coord[1] as u32, coord[0] as u32, pixel);
    }
    img
}

pub fn write_image<F: GridFloat, P: AsRef<std::path::Path>>(
    grid: &Grid<F>,
    path: &P,
) -> Result<(), HarnessError> {
    profiling::scope!("write_image");
    let path = path.as_ref();
    tracing::info!("Writing: {:?}", path);
    grid_to_image(grid)
        .save(path)
        .map_err(|source| HarnessError::Image {
            path: path.to_path_buf(),
            source,
        })
}
