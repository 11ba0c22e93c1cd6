//! District: an id plus the odd and even birth-month populations.

use crate::models::game::GameError;
use crate::models::person::{Parity, Person, PersonId};
use serde::Serialize;

/// Unique identifier for a district; the tournament tree is keyed by it.
pub type DistrictId = i32;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct District {
    pub id: DistrictId,
    odd_population: Vec<Person>,
    even_population: Vec<Person>,
}

impl District {
    pub fn new(id: DistrictId) -> Self {
        Self {
            id,
            odd_population: Vec::new(),
            even_population: Vec::new(),
        }
    }

    /// Append a person to the population matching their birth-month parity.
    ///
    /// A person registered to another district is refused and handed back inside
    /// [`GameError::WrongDistrict`].
    pub fn add_person(&mut self, person: Person) -> Result<(), GameError> {
        if person.district_id() != self.id {
            return Err(GameError::WrongDistrict {
                district_id: self.id,
                person: Box::new(person),
            });
        }
        match person.parity() {
            Parity::Odd => self.odd_population.push(person),
            Parity::Even => self.even_population.push(person),
        }
        Ok(())
    }

    pub fn population(&self, parity: Parity) -> &[Person] {
        match parity {
            Parity::Odd => &self.odd_population,
            Parity::Even => &self.even_population,
        }
    }

    pub fn odd_population(&self) -> &[Person] {
        &self.odd_population
    }

    pub fn even_population(&self) -> &[Person] {
        &self.even_population
    }

    pub fn contains(&self, person_id: PersonId) -> bool {
        self.odd_population
            .iter()
            .chain(self.even_population.iter())
            .any(|p| p.id() == person_id)
    }

    /// Take a person out of whichever population holds them (odd is searched first).
    pub fn remove_person(&mut self, person_id: PersonId) -> Option<Person> {
        if let Some(idx) = self.odd_population.iter().position(|p| p.id() == person_id) {
            return Some(self.odd_population.remove(idx));
        }
        let idx = self.even_population.iter().position(|p| p.id() == person_id)?;
        Some(self.even_population.remove(idx))
    }

    /// A district with an empty odd or even population can no longer field a pair.
    pub fn is_viable(&self) -> bool {
        !self.odd_population.is_empty() && !self.even_population.is_empty()
    }

    pub fn len(&self) -> usize {
        self.odd_population.len() + self.even_population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
