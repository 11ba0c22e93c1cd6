//! Duel resolution and district pruning.

use crate::models::{
    District, DistrictId, DuelJudge, DuelOutcome, DuelPair, DuelSide, GameError, Person,
    TournamentTree,
};

/// Resolve one pair and put everyone back.
///
/// A complete pair duels through `judge`; the win and loss are recorded and both people go
/// back to their own district. An incomplete pair returns the present side without a duel
/// and yields `None`.
///
/// If a dueler's district is gone, no duel is fought: whoever can go home does, and the rest
/// come back in [`GameError::DistrictNotFound`].
pub fn eliminate_dueler<J>(
    tree: &mut TournamentTree,
    pair: DuelPair,
    judge: &mut J,
) -> Result<Option<DuelOutcome>, GameError>
where
    J: DuelJudge + ?Sized,
{
    match (pair.person1, pair.person2) {
        (Some(first), Some(second)) => {
            let missing = [first.district_id(), second.district_id()]
                .into_iter()
                .find(|&id| tree.find(id).is_none());
            if let Some(district_id) = missing {
                return Err(strand(tree, district_id, [first, second]));
            }
            let (mut winner, mut loser) = match judge.duel(&first, &second) {
                DuelSide::First => (first, second),
                DuelSide::Second => (second, first),
            };
            winner.add_win();
            loser.add_loss();
            log::debug!(
                "{} (district {}) beat {} (district {})",
                winner.full_name(),
                winner.district_id(),
                loser.full_name(),
                loser.district_id()
            );
            let outcome = DuelOutcome {
                winner: winner.clone(),
                loser: loser.clone(),
            };
            return_to_district(tree, winner)?;
            return_to_district(tree, loser)?;
            Ok(Some(outcome))
        }
        (Some(person), None) | (None, Some(person)) => {
            return_to_district(tree, person)?;
            Ok(None)
        }
        (None, None) => Ok(None),
    }
}

fn strand(
    tree: &mut TournamentTree,
    district_id: DistrictId,
    people: impl IntoIterator<Item = Person>,
) -> GameError {
    let mut stranded = Vec::new();
    for person in people {
        match return_to_district(tree, person) {
            Ok(()) => {}
            Err(GameError::DistrictNotFound { stranded: left, .. }) => stranded.extend(left),
            Err(GameError::WrongDistrict { person, .. }) => stranded.push(*person),
            Err(_) => {}
        }
    }
    log::warn!(
        "district {} is gone; {} dueler(s) could not be returned",
        district_id,
        stranded.len()
    );
    GameError::DistrictNotFound {
        district_id,
        stranded,
    }
}

/// Append a person to the parity-matching population of their own district. When that
/// district is not in the tree the person comes back inside the error.
pub fn return_to_district(tree: &mut TournamentTree, person: Person) -> Result<(), GameError> {
    let district_id = person.district_id();
    match tree.find_mut(district_id) {
        Some(district) => district.add_person(person),
        None => Err(GameError::DistrictNotFound {
            district_id,
            stranded: vec![person],
        }),
    }
}

/// Remove the district from the tree when its odd or even population is empty and hand it
/// back. Absent and viable ids are a no-op.
pub fn check_district_population(tree: &mut TournamentTree, id: DistrictId) -> Option<District> {
    if tree.find(id)?.is_viable() {
        return None;
    }
    let district = tree.remove(id)?;
    log::info!("district {} eliminated", id);
    Some(district)
}

/// Run the population check over every district still in the tree. Returns the removed
/// districts in pre-order.
pub fn prune_unviable(tree: &mut TournamentTree) -> Vec<District> {
    let unviable: Vec<DistrictId> = tree
        .preorder()
        .filter(|d| !d.is_viable())
        .map(|d| d.id)
        .collect();
    unviable
        .into_iter()
        .filter_map(|id| check_district_population(tree, id))
        .collect()
}
