//! Duel pair, duel side, and the duel-resolution oracle.

use crate::models::person::Person;
use serde::{Deserialize, Serialize};

/// Which side of a pair won a duel.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuelSide {
    First,
    Second,
}

/// The two people chosen for one round. `person1` comes from the odd population,
/// `person2` from the even population. Either side may be missing.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct DuelPair {
    pub person1: Option<Person>,
    pub person2: Option<Person>,
}

impl DuelPair {
    pub fn new(person1: Option<Person>, person2: Option<Person>) -> Self {
        Self { person1, person2 }
    }

    pub fn is_complete(&self) -> bool {
        self.person1.is_some() && self.person2.is_some()
    }
}

/// Result of a contested duel. Both people have already been returned to their districts;
/// these are snapshots taken after the win/loss was recorded.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DuelOutcome {
    pub winner: Person,
    pub loser: Person,
}

/// Decides who wins a duel. Implemented for closures so callers can plug in any rule.
pub trait DuelJudge {
    fn duel(&mut self, first: &Person, second: &Person) -> DuelSide;
}

impl<F> DuelJudge for F
where
    F: FnMut(&Person, &Person) -> DuelSide,
{
    fn duel(&mut self, first: &Person, second: &Person) -> DuelSide {
        self(first, second)
    }
}

/// Higher effectiveness wins; ties go to the first person.
#[derive(Clone, Copy, Debug, Default)]
pub struct EffectivenessJudge;

impl DuelJudge for EffectivenessJudge {
    fn duel(&mut self, first: &Person, second: &Person) -> DuelSide {
        if second.effectiveness > first.effectiveness {
            DuelSide::Second
        } else {
            DuelSide::First
        }
    }
}
