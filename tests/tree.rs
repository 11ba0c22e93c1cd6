//! Integration tests for the tournament tree: insert, find, remove, traversals.

use district_tournament::{District, DistrictId, Parity, Person, TournamentTree};

fn tree_of(ids: &[DistrictId]) -> TournamentTree {
    let mut tree = TournamentTree::new();
    for &id in ids {
        assert!(tree.insert(District::new(id)));
    }
    tree
}

fn permutations(items: &[DistrictId]) -> Vec<Vec<DistrictId>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn every_insertion_order_gives_sorted_in_order_walk() {
    let orders = permutations(&[5, 3, 8, 1]);
    assert_eq!(orders.len(), 24);
    for order in orders {
        let tree = tree_of(&order);
        assert_eq!(tree.in_order_ids(), vec![1, 3, 5, 8], "order {:?}", order);
        assert!(tree.is_valid_bst());
        assert_eq!(tree.root().unwrap().district.id, order[0]);
    }
}

#[test]
fn duplicate_insert_is_ignored() {
    let mut tree = tree_of(&[5, 3, 8]);
    let mut original = District::new(3);
    original.add_person(Person::new("Rue", "Barley", 3, 12, 3, 40)).unwrap();
    original.add_person(Person::new("Thresh", "Reaper", 6, 18, 3, 90)).unwrap();
    let mut tree_with_people = TournamentTree::new();
    tree_with_people.insert(District::new(5));
    tree_with_people.insert(original);
    tree_with_people.insert(District::new(8));

    let mut replacement = District::new(3);
    replacement.add_person(Person::new("Seeder", "Grain", 1, 40, 3, 10)).unwrap();
    assert!(!tree_with_people.insert(replacement));
    assert_eq!(tree_with_people.len(), 3);
    let kept = tree_with_people.find(3).unwrap();
    assert_eq!(kept.odd_population().len(), 1);
    assert_eq!(kept.odd_population()[0].first_name, "Rue");
    assert_eq!(kept.even_population().len(), 1);

    assert!(!tree.insert(District::new(8)));
    assert_eq!(tree.len(), 3);
}

#[test]
fn find_hits_only_present_ids_within_depth() {
    let tree = tree_of(&[50, 30, 70, 20, 40, 60, 80, 10]);
    let height = tree.height();
    assert_eq!(height, 4);
    for id in 0..=90 {
        let found = tree.find(id);
        let present = tree.in_order_ids().contains(&id);
        assert_eq!(found.is_some(), present, "id {}", id);
        if let Some(d) = found {
            assert_eq!(d.id, id);
        }
        let path = tree.search_path(id);
        assert!(path.len() <= height, "id {} visited {:?}", id, path);
    }
    assert_eq!(tree.search_path(10), vec![50, 30, 20, 10]);
    assert_eq!(tree.search_path(65), vec![50, 70, 60]);
}

#[test]
fn sorted_insertion_degenerates_into_a_chain() {
    let tree = tree_of(&[1, 2, 3, 4, 5]);
    assert_eq!(tree.height(), 5);
    assert_eq!(tree.search_path(5).len(), 5);
}

#[test]
fn removing_a_leaf_drops_one_node() {
    let mut tree = tree_of(&[5, 3, 8, 1]);
    let removed = tree.remove(1).unwrap();
    assert_eq!(removed.id, 1);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.in_order_ids(), vec![3, 5, 8]);
    assert!(tree.find(1).is_none());
    assert!(tree.is_valid_bst());
}

#[test]
fn removing_a_node_with_one_child_promotes_the_child() {
    let mut tree = tree_of(&[5, 3, 1]);
    tree.remove(3);
    let root = tree.root().unwrap();
    assert_eq!(root.left.as_ref().unwrap().district.id, 1);
    assert_eq!(tree.in_order_ids(), vec![1, 5]);
}

#[test]
fn removing_a_node_with_two_children_moves_the_successor_up() {
    let ids = [5, 3, 8, 1, 4, 7, 9, 6];
    let mut tree = TournamentTree::new();
    for id in ids {
        let mut district = District::new(id);
        district.add_person(Person::new("P", id.to_string(), 1, 30, id, id)).unwrap();
        tree.insert(district);
    }

    let removed = tree.remove(5).unwrap();
    assert_eq!(removed.id, 5);
    assert_eq!(removed.odd_population()[0].last_name, "5");

    let root = tree.root().unwrap();
    assert_eq!(root.district.id, 6);
    assert_eq!(root.district.odd_population()[0].last_name, "6");
    assert_eq!(tree.len(), ids.len() - 1);
    assert_eq!(tree.in_order_ids(), vec![1, 3, 4, 6, 7, 8, 9]);
    assert!(tree.is_valid_bst());

    // Interior two-child node.
    tree.remove(3);
    assert_eq!(tree.in_order_ids(), vec![1, 4, 6, 7, 8, 9]);
    assert!(tree.is_valid_bst());
}

#[test]
fn removing_an_absent_id_is_a_no_op() {
    let mut tree = tree_of(&[5, 3, 8]);
    assert!(tree.remove(42).is_none());
    assert_eq!(tree.in_order_ids(), vec![3, 5, 8]);

    let mut empty = TournamentTree::new();
    assert!(empty.remove(1).is_none());
    assert!(empty.is_empty());
}

#[test]
fn removing_everything_empties_the_tree() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4, 7, 9]);
    for id in [5, 1, 9, 7, 3, 8, 4] {
        assert!(tree.remove(id).is_some());
        assert!(tree.is_valid_bst());
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn preorder_visits_node_then_left_then_right() {
    let tree = tree_of(&[5, 3, 8, 1, 4, 9]);
    let ids: Vec<DistrictId> = tree.preorder().map(|d| d.id).collect();
    assert_eq!(ids, vec![5, 3, 1, 4, 8, 9]);
}

#[test]
fn population_and_person_at_follow_preorder() {
    let mut tree = TournamentTree::new();
    for (id, odd_names) in [(5, vec!["a"]), (3, vec!["b", "c"]), (8, vec!["d"])] {
        let mut district = District::new(id);
        for name in odd_names {
            district.add_person(Person::new(name, "X", 7, 30, id, 1)).unwrap();
        }
        district.add_person(Person::new("even", "X", 8, 30, id, 1)).unwrap();
        tree.insert(district);
    }
    assert_eq!(tree.population(Parity::Odd), 4);
    assert_eq!(tree.population(Parity::Even), 3);

    let names: Vec<&str> = (0..4)
        .map(|i| tree.person_at(Parity::Odd, i).unwrap().first_name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
    assert!(tree.person_at(Parity::Odd, 4).is_none());
}

#[test]
fn take_person_removes_by_identity() {
    let mut tree = TournamentTree::new();
    let mut district = District::new(2);
    let twin_a = Person::new("Same", "Name", 2, 20, 2, 5);
    let twin_b = Person::new("Same", "Name", 2, 20, 2, 5);
    let target = twin_b.id();
    district.add_person(twin_a).unwrap();
    district.add_person(twin_b).unwrap();
    tree.insert(district);

    let taken = tree.take_person(target).unwrap();
    assert_eq!(taken.id(), target);
    let left = tree.find(2).unwrap().even_population();
    assert_eq!(left.len(), 1);
    assert_ne!(left[0].id(), target);
    assert!(tree.take_person(target).is_none());
}
