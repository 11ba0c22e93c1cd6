//! Data structures for the game: people, districts, the tournament tree, duels, sessions.

mod district;
mod duel;
mod game;
mod person;
mod tree;

pub use district::{District, DistrictId};
pub use duel::{DuelJudge, DuelOutcome, DuelPair, DuelSide, EffectivenessJudge};
pub use game::{
    Game, GameConfig, GameError, GameId, GameSnapshot, RoundReport, DEFAULT_SEED,
};
pub use person::{Parity, Person, PersonId, TESSERA_MAX_AGE, TESSERA_MIN_AGE};
pub use tree::{PreOrder, TournamentTree, TreeNode};
