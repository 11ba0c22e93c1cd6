//! Duel selection: pick one odd and one even person from the tree and take them out of
//! their districts.

use crate::logic::random::RandomSource;
use crate::models::{DuelPair, GameError, Parity, Person, PersonId, TournamentTree};

/// Tessera holders in pre-order, split by population: `(odd, even)`.
pub fn tessera_candidates(tree: &TournamentTree) -> (Vec<&Person>, Vec<&Person>) {
    let mut odd = Vec::new();
    let mut even = Vec::new();
    for district in tree.preorder() {
        odd.extend(district.odd_population().iter().filter(|p| p.tessera()));
        even.extend(district.even_population().iter().filter(|p| p.tessera()));
    }
    (odd, even)
}

/// Select the duelers for one round.
///
/// 1. The first tessera holder (pre-order) of each population is chosen when one exists.
/// 2. Otherwise one draw from `rng` picks an index into the pre-order concatenation of that
///    whole population. The odd side draws before the even side.
/// 3. Both chosen people are removed from their district lists by id.
///
/// People from the same district may be paired. Fails with [`GameError::EmptyPopulation`]
/// when a fallback draw is needed over a population with nobody in it; nothing is removed
/// in that case.
pub fn select_duelers<R>(tree: &mut TournamentTree, rng: &mut R) -> Result<DuelPair, GameError>
where
    R: RandomSource + ?Sized,
{
    let (odd_id, even_id) = {
        let (odd, even) = tessera_candidates(tree);
        let odd_id = pick(tree, &odd, Parity::Odd, rng)?;
        let even_id = pick(tree, &even, Parity::Even, rng)?;
        (odd_id, even_id)
    };

    let person1 = tree.take_person(odd_id);
    let person2 = tree.take_person(even_id);
    Ok(DuelPair::new(person1, person2))
}

fn pick<R>(
    tree: &TournamentTree,
    candidates: &[&Person],
    parity: Parity,
    rng: &mut R,
) -> Result<PersonId, GameError>
where
    R: RandomSource + ?Sized,
{
    if let Some(first) = candidates.first() {
        return Ok(first.id());
    }
    let size = tree.population(parity);
    if size == 0 {
        return Err(GameError::EmptyPopulation(parity));
    }
    let index = rng.uniform(size);
    log::debug!("no {} tessera holder, drew index {} of {}", parity, index, size);
    tree.person_at(parity, index)
        .map(|p| p.id())
        .ok_or(GameError::EmptyPopulation(parity))
}
