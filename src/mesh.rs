//! Hand-off to the surface builder
//!
//! Turning a finished grid into renderable geometry happens outside this
//! crate. [`MeshBuilder`] is the seam: it receives the grid together with the
//! passage radius, the seed and the area, and gives nothing back to generation.

use crate::area::AreaDescriptor;
use crate::cell::CaveGrid;
use crate::seeds::CaveSeed;

pub trait MeshBuilder {
    type Output;

    fn generate_mesh(
        &mut self,
        grid: &CaveGrid,
        passage_radius: i32,
        seed: &CaveSeed,
        area: &dyn AreaDescriptor,
    ) -> Self::Output;
}
