use crate::*;
pub use random::*;

mod random;

/// Source of randomness for tile spawning, owned by a single field.
pub trait TileGenerator {
    /// Picks an index uniformly from `0..len`, `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Exponent of a freshly spawned tile.
    fn tile_exponent(&mut self) -> Exponent;
}

impl<G: TileGenerator + ?Sized> TileGenerator for &mut G {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }

    fn tile_exponent(&mut self) -> Exponent {
        (**self).tile_exponent()
    }
}
