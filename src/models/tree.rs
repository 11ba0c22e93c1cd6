//! Tournament tree: an unbalanced binary search tree of districts keyed by district id.
//!
//! Shape depends on insertion order; nothing is ever rebalanced. Every aggregate walk
//! (population counts, candidate collection, removal by identity) is pre-order:
//! current district, then the left subtree, then the right subtree.

use crate::models::district::{District, DistrictId};
use crate::models::person::{Parity, Person, PersonId};
use serde::Serialize;
use std::cmp::Ordering;

/// A node owning its district and both child subtrees.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TreeNode {
    pub district: District,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(district: District) -> Self {
        Self {
            district,
            left: None,
            right: None,
        }
    }

    /// Id of the leftmost (minimum) district in this subtree.
    fn min_id(&self) -> DistrictId {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node.district.id
    }
}

/// The districts still in the game.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct TournamentTree {
    root: Option<Box<TreeNode>>,
}

impl TournamentTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of districts in the tree.
    pub fn len(&self) -> usize {
        self.preorder().count()
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
    pub fn height(&self) -> usize {
        fn walk(node: Option<&TreeNode>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + walk(n.left.as_deref()).max(walk(n.right.as_deref())),
            }
        }
        walk(self.root.as_deref())
    }

    /// Insert a district as a new leaf. Returns `false` (and leaves the tree untouched)
    /// when a district with the same id is already present.
    pub fn insert(&mut self, district: District) -> bool {
        Self::insert_at(&mut self.root, district)
    }

    fn insert_at(slot: &mut Option<Box<TreeNode>>, district: District) -> bool {
        match slot {
            None => {
                *slot = Some(Box::new(TreeNode::new(district)));
                true
            }
            Some(node) => match district.id.cmp(&node.district.id) {
                Ordering::Less => Self::insert_at(&mut node.left, district),
                Ordering::Greater => Self::insert_at(&mut node.right, district),
                Ordering::Equal => {
                    log::debug!("district {} already in the game, ignoring insert", district.id);
                    false
                }
            },
        }
    }

    pub fn find(&self, id: DistrictId) -> Option<&District> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match id.cmp(&node.district.id) {
                Ordering::Equal => return Some(&node.district),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn find_mut(&mut self, id: DistrictId) -> Option<&mut District> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            cur = match id.cmp(&node.district.id) {
                Ordering::Equal => return Some(&mut node.district),
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }

    /// Ids of the nodes a search for `id` compares against, root first.
    /// Never longer than [`TournamentTree::height`].
    pub fn search_path(&self, id: DistrictId) -> Vec<DistrictId> {
        let mut path = Vec::new();
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            path.push(node.district.id);
            cur = match id.cmp(&node.district.id) {
                Ordering::Equal => break,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        path
    }

    /// Remove the district with `id`, returning it. Absent ids are a no-op.
    ///
    /// A node with two children keeps its place in the tree: the in-order successor's
    /// district is moved up into it and the successor is deleted from the right subtree.
    pub fn remove(&mut self, id: DistrictId) -> Option<District> {
        Self::remove_at(&mut self.root, id)
    }

    fn remove_at(slot: &mut Option<Box<TreeNode>>, id: DistrictId) -> Option<District> {
        let node = slot.as_mut()?;
        match id.cmp(&node.district.id) {
            Ordering::Less => Self::remove_at(&mut node.left, id),
            Ordering::Greater => Self::remove_at(&mut node.right, id),
            Ordering::Equal if node.left.is_some() && node.right.is_some() => {
                let successor_id = node.right.as_deref().map(TreeNode::min_id)?;
                let successor = Self::remove_at(&mut node.right, successor_id)?;
                Some(std::mem::replace(&mut node.district, successor))
            }
            Ordering::Equal => {
                let mut removed = slot.take()?;
                *slot = removed.left.take().or_else(|| removed.right.take());
                Some(removed.district)
            }
        }
    }

    /// Pre-order iterator over the districts.
    pub fn preorder(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    /// District ids in ascending order.
    pub fn in_order_ids(&self) -> Vec<DistrictId> {
        fn walk(node: Option<&TreeNode>, out: &mut Vec<DistrictId>) {
            if let Some(n) = node {
                walk(n.left.as_deref(), out);
                out.push(n.district.id);
                walk(n.right.as_deref(), out);
            }
        }
        let mut ids = Vec::new();
        walk(self.root.as_deref(), &mut ids);
        ids
    }

    /// Total size of one population across every district.
    pub fn population(&self, parity: Parity) -> usize {
        self.preorder().map(|d| d.population(parity).len()).sum()
    }

    /// The person at `index` in the pre-order concatenation of every district's
    /// `parity` population.
    pub fn person_at(&self, parity: Parity, mut index: usize) -> Option<&Person> {
        for district in self.preorder() {
            let population = district.population(parity);
            if index < population.len() {
                return Some(&population[index]);
            }
            index -= population.len();
        }
        None
    }

    /// Take a person out of whichever district population holds them.
    pub fn take_person(&mut self, person_id: PersonId) -> Option<Person> {
        fn walk(slot: &mut Option<Box<TreeNode>>, person_id: PersonId) -> Option<Person> {
            let node = slot.as_deref_mut()?;
            if let Some(person) = node.district.remove_person(person_id) {
                return Some(person);
            }
            if let Some(person) = walk(&mut node.left, person_id) {
                return Some(person);
            }
            walk(&mut node.right, person_id)
        }
        walk(&mut self.root, person_id)
    }

    /// Whether every left descendant has a smaller id and every right descendant a larger one.
    pub fn is_valid_bst(&self) -> bool {
        fn check(node: Option<&TreeNode>, lo: Option<DistrictId>, hi: Option<DistrictId>) -> bool {
            let Some(n) = node else { return true };
            let id = n.district.id;
            if lo.is_some_and(|lo| id <= lo) || hi.is_some_and(|hi| id >= hi) {
                return false;
            }
            check(n.left.as_deref(), lo, Some(id)) && check(n.right.as_deref(), Some(id), hi)
        }
        check(self.root.as_deref(), None, None)
    }
}

/// See [`TournamentTree::preorder`].
pub struct PreOrder<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a District;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some(&node.district)
    }
}
