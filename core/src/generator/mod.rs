use crate::*;
pub use random::*;

mod random;

/// Decides where the mines go once the first cell to open is known.
///
/// The returned layout must have the size of `config`.
pub trait MineGenerator {
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> MineLayout;
}
