//! Person: one member of a district population.

use crate::models::district::DistrictId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a person. Removal from a population is by this id, not by field equality.
pub type PersonId = Uuid;

/// Youngest age (inclusive) that holds a tessera.
pub const TESSERA_MIN_AGE: u32 = 12;
/// Age (exclusive) at which the tessera no longer applies.
pub const TESSERA_MAX_AGE: u32 = 18;

/// Which district population a person belongs to, decided by birth month.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn of_month(birth_month: u8) -> Self {
        if birth_month % 2 == 1 {
            Parity::Odd
        } else {
            Parity::Even
        }
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parity::Odd => write!(f, "odd"),
            Parity::Even => write!(f, "even"),
        }
    }
}

/// A person in the game. Identity, birth month, age, district and tessera are fixed at creation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Person {
    id: PersonId,
    pub first_name: String,
    pub last_name: String,
    birth_month: u8,
    age: u32,
    district_id: DistrictId,
    pub effectiveness: i32,
    tessera: bool,
    pub wins: u32,
    pub losses: u32,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_month: u8,
        age: u32,
        district_id: DistrictId,
        effectiveness: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_month,
            age,
            district_id,
            effectiveness,
            tessera: (TESSERA_MIN_AGE..TESSERA_MAX_AGE).contains(&age),
            wins: 0,
            losses: 0,
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    /// 1..=12.
    pub fn birth_month(&self) -> u8 {
        self.birth_month
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn district_id(&self) -> DistrictId {
        self.district_id
    }

    /// Whether this person holds a tessera (age 12 through 17 at creation).
    pub fn tessera(&self) -> bool {
        self.tessera
    }

    pub fn parity(&self) -> Parity {
        Parity::of_month(self.birth_month)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Record a duel win for this person.
    pub fn add_win(&mut self) {
        self.wins += 1;
    }

    /// Record a duel loss for this person.
    pub fn add_loss(&mut self) {
        self.losses += 1;
    }
}
