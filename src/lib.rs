//! District tournament: a binary search tree of districts with a duel selection engine.

pub mod logic;
pub mod models;

pub use logic::{
    check_district_population, eliminate_dueler, parse_panem, prune_unviable, read_panem,
    return_to_district, select_duelers, tessera_candidates, RandomSource, SeededRandom,
    SetupError,
};
pub use models::{
    District, DistrictId, DuelJudge, DuelOutcome, DuelPair, DuelSide, EffectivenessJudge, Game,
    GameConfig, GameError, GameId, GameSnapshot, Parity, Person, PersonId, PreOrder,
    RoundReport, TournamentTree, TreeNode, DEFAULT_SEED, TESSERA_MAX_AGE, TESSERA_MIN_AGE,
};
