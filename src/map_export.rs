//! PNG export of finished areas
//!
//! [`PngExporter`] plays the surface-builder role for tooling: instead of a
//! mesh it writes the grid as an image, one `scale`-sized square per cell.

use std::path::{Path, PathBuf};

use image::{ImageBuffer, ImageError, Rgb, RgbImage};

use crate::area::AreaDescriptor;
use crate::cell::{Cell, CaveGrid};
use crate::mesh::MeshBuilder;
use crate::seeds::CaveSeed;

const WALL_COLOR: Rgb<u8> = Rgb([46, 40, 36]);
const OPEN_COLOR: Rgb<u8> = Rgb([196, 182, 150]);

/// Rasterize the grid, top side up.
pub fn render_image(grid: &CaveGrid, scale: u32) -> RgbImage {
    let scale = scale.max(1);
    let width = grid.width as u32 * scale;
    let height = grid.height as u32 * scale;
    let last_row = grid.height as u32 - 1;

    ImageBuffer::from_fn(width, height, |px, py| {
        let x = (px / scale) as usize;
        let y = (last_row - py / scale) as usize;
        match grid.get(x, y) {
            Cell::Wall => WALL_COLOR,
            Cell::Open => OPEN_COLOR,
        }
    })
}

pub fn export_png(grid: &CaveGrid, path: impl AsRef<Path>, scale: u32) -> Result<(), ImageError> {
    render_image(grid, scale).save(path)
}

/// Writes each generated area to `<directory>/area_<identity>.png`.
pub struct PngExporter {
    pub directory: PathBuf,
    pub scale: u32,
}

impl MeshBuilder for PngExporter {
    type Output = Result<PathBuf, ImageError>;

    fn generate_mesh(
        &mut self,
        grid: &CaveGrid,
        _passage_radius: i32,
        _seed: &CaveSeed,
        area: &dyn AreaDescriptor,
    ) -> Self::Output {
        let path = self.directory.join(format!("area_{}.png", area.identity()));
        export_png(grid, &path, self.scale)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_orientation_and_scale() {
        let mut grid = CaveGrid::new(4, 4);
        grid.set(0, 3, Cell::Open);
        let img = render_image(&grid, 2);
        assert_eq!(img.dimensions(), (8, 8));
        assert_eq!(*img.get_pixel(0, 0), OPEN_COLOR);
        assert_eq!(*img.get_pixel(1, 1), OPEN_COLOR);
        assert_eq!(*img.get_pixel(0, 7), WALL_COLOR);
    }
}
