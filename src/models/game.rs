//! Game session: registered districts, the tournament tree, and the session's random source.

use crate::logic::{self, RandomSource, SeededRandom, SetupError};
use crate::models::district::{District, DistrictId};
use crate::models::duel::{DuelJudge, DuelOutcome, DuelPair, EffectivenessJudge};
use crate::models::person::{Parity, Person};
use crate::models::tree::{TournamentTree, TreeNode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during game operations.
#[derive(Debug)]
pub enum GameError {
    /// A random draw was needed over a population with nobody in it.
    EmptyPopulation(Parity),
    /// A dueler's district is no longer in the game. Duelers whose district is still present
    /// have been returned to it; the rest are handed back in `stranded`.
    DistrictNotFound {
        district_id: DistrictId,
        stranded: Vec<Person>,
    },
    /// A person was offered to a district other than their own. The person is handed back.
    WrongDistrict {
        district_id: DistrictId,
        person: Box<Person>,
    },
    /// The input could not be read.
    Setup(SetupError),
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::EmptyPopulation(parity) => {
                write!(f, "No {} population left to draw a dueler from", parity)
            }
            GameError::DistrictNotFound {
                district_id,
                stranded,
            } => write!(
                f,
                "District {} is not in the game ({} dueler(s) could not be returned)",
                district_id,
                stranded.len()
            ),
            GameError::WrongDistrict {
                district_id,
                person,
            } => write!(
                f,
                "{} belongs to district {}, not district {}",
                person.full_name(),
                person.district_id(),
                district_id
            ),
            GameError::Setup(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Setup(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SetupError> for GameError {
    fn from(e: SetupError) -> Self {
        GameError::Setup(e)
    }
}

/// Unique identifier for a game session.
pub type GameId = Uuid;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 2023;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// Session settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Read `GAME_SEED` from the environment, keeping the default seed when it is unset or
    /// not a number.
    pub fn from_env() -> Self {
        let Ok(raw) = std::env::var("GAME_SEED") else {
            return Self::default();
        };
        match raw.trim().parse() {
            Ok(seed) => Self { seed },
            Err(_) => {
                log::warn!("GAME_SEED={:?} is not a number, using seed {}", raw, DEFAULT_SEED);
                Self::default()
            }
        }
    }
}

/// What happened in one call to [`Game::play_round`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    /// `None` when the pair was incomplete and no duel took place.
    pub outcome: Option<DuelOutcome>,
    /// Districts removed by the population check after the duel.
    pub eliminated_districts: Vec<DistrictId>,
    pub remaining_districts: usize,
}

/// Read-only view for the driver.
#[derive(Debug, Serialize)]
pub struct GameSnapshot<'a> {
    pub id: GameId,
    pub districts: &'a [DistrictId],
    pub eliminated: &'a [District],
    pub rounds_played: u32,
    pub remaining_districts: usize,
    pub root: Option<&'a TreeNode>,
}

/// One game session. Owns everything it mutates; sessions never share state.
pub struct Game<R = SeededRandom, J = EffectivenessJudge> {
    pub id: GameId,
    /// Every district ever registered, in registration order.
    districts: Vec<DistrictId>,
    tree: TournamentTree,
    /// Districts taken out of the tree, in elimination order, with the people they held.
    eliminated: Vec<District>,
    rng: R,
    judge: J,
    rounds_played: u32,
}

impl Game {
    /// Empty session seeded from `config`, judging duels by effectiveness.
    pub fn new(config: GameConfig) -> Self {
        Self::with_parts(SeededRandom::new(config.seed), EffectivenessJudge)
    }

    /// Session with the districts (and their people) in `input` registered in order.
    /// Districts that cannot field both an odd and an even person are eliminated up front.
    pub fn setup(config: GameConfig, input: &str) -> Result<Self, GameError> {
        let districts = logic::parse_panem(input)?;
        Ok(Self::from_districts(config, districts))
    }

    /// Register `districts` in order, then eliminate the unviable ones.
    pub fn from_districts(config: GameConfig, districts: Vec<District>) -> Self {
        let mut game = Self::new(config);
        game.register_districts(districts);
        let pruned = game.prune_unviable();
        if !pruned.is_empty() {
            log::info!("game {}: districts {:?} unviable at setup", game.id, pruned);
        }
        game
    }
}

impl<R: RandomSource, J: DuelJudge> Game<R, J> {
    pub fn with_parts(rng: R, judge: J) -> Self {
        Self {
            id: Uuid::new_v4(),
            districts: Vec::new(),
            tree: TournamentTree::new(),
            eliminated: Vec::new(),
            rng,
            judge,
            rounds_played: 0,
        }
    }

    pub fn register_districts(&mut self, districts: impl IntoIterator<Item = District>) {
        for district in districts {
            self.add_district(district);
        }
    }

    /// Add a district to the tree. A district whose id is already in the game is ignored.
    pub fn add_district(&mut self, district: District) -> bool {
        let id = district.id;
        let added = self.tree.insert(district);
        if added {
            self.districts.push(id);
        }
        added
    }

    /// Take a district out of the tree. The removed record is kept in [`Game::eliminated`].
    pub fn eliminate_district(&mut self, id: DistrictId) -> Option<&District> {
        let district = self.tree.remove(id)?;
        Some(self.archive(district))
    }

    fn archive(&mut self, district: District) -> &District {
        self.eliminated.push(district);
        &self.eliminated[self.eliminated.len() - 1]
    }

    /// A district still in the tree.
    pub fn find_district(&self, id: DistrictId) -> Option<&District> {
        self.tree.find(id)
    }

    /// A registered district, whether still in the tree or eliminated.
    pub fn registered_district(&self, id: DistrictId) -> Option<&District> {
        self.tree
            .find(id)
            .or_else(|| self.eliminated.iter().find(|d| d.id == id))
    }

    /// Ids of every registered district, including ones since eliminated. Use
    /// [`Game::registered_district`] or [`Game::eliminated`] for their people.
    pub fn districts(&self) -> &[DistrictId] {
        &self.districts
    }

    /// Eliminated districts in elimination order.
    pub fn eliminated(&self) -> &[District] {
        &self.eliminated
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.tree.root()
    }

    pub fn tree(&self) -> &TournamentTree {
        &self.tree
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn select_duelers(&mut self) -> Result<DuelPair, GameError> {
        logic::select_duelers(&mut self.tree, &mut self.rng)
    }

    pub fn eliminate_dueler(&mut self, pair: DuelPair) -> Result<Option<DuelOutcome>, GameError> {
        logic::eliminate_dueler(&mut self.tree, pair, &mut self.judge)
    }

    /// Eliminate the district if it can no longer field a pair. Returns whether it was removed.
    pub fn check_district_population(&mut self, id: DistrictId) -> bool {
        match logic::check_district_population(&mut self.tree, id) {
            Some(district) => {
                self.archive(district);
                true
            }
            None => false,
        }
    }

    /// Remove every district that cannot field both an odd and an even person.
    pub fn prune_unviable(&mut self) -> Vec<DistrictId> {
        let removed = logic::prune_unviable(&mut self.tree);
        let ids = removed.iter().map(|d| d.id).collect();
        self.eliminated.extend(removed);
        ids
    }

    /// One full cycle: select, duel, return both, then check the duelers' districts.
    pub fn play_round(&mut self) -> Result<RoundReport, GameError> {
        let pair = self.select_duelers()?;
        let mut touched: Vec<DistrictId> = [&pair.person1, &pair.person2]
            .into_iter()
            .flatten()
            .map(|p| p.district_id())
            .collect();
        touched.dedup();

        let outcome = self.eliminate_dueler(pair)?;
        let eliminated_districts = touched
            .into_iter()
            .filter(|&id| self.check_district_population(id))
            .collect();

        self.rounds_played += 1;
        Ok(RoundReport {
            round: self.rounds_played,
            outcome,
            eliminated_districts,
            remaining_districts: self.tree.len(),
        })
    }

    /// At most one district remains.
    pub fn is_decided(&self) -> bool {
        self.tree.len() <= 1
    }

    /// The last district standing, once the game is decided.
    pub fn survivor(&self) -> Option<&District> {
        match self.tree.root() {
            Some(root) if root.left.is_none() && root.right.is_none() => Some(&root.district),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            id: self.id,
            districts: &self.districts,
            eliminated: &self.eliminated,
            rounds_played: self.rounds_played,
            remaining_districts: self.tree.len(),
            root: self.tree.root(),
        }
    }
}
