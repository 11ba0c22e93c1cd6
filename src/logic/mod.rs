//! Game logic: input setup, duel selection, elimination.

mod elimination;
mod random;
mod selection;
mod setup;

pub use elimination::{
    check_district_population, eliminate_dueler, prune_unviable, return_to_district,
};
pub use random::{RandomSource, SeededRandom};
pub use selection::{select_duelers, tessera_candidates};
pub use setup::{parse_panem, read_panem, SetupError};
