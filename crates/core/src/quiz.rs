//! Quiz question selection.
//!
//! The client holds all quiz state: it sends the ids it has already been
//! served and the category it is playing. The server narrows the in-scope
//! questions to those not yet served and picks one uniformly at random.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::{DbId, ALL_CATEGORIES};

/// Anything with a stable database id.
pub trait Identified {
    fn id(&self) -> DbId;
}

/// Which questions a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(DbId),
}

impl QuizScope {
    /// Map a requested category id onto a scope; `0` means every category.
    pub fn from_category_id(id: DbId) -> Self {
        if id == ALL_CATEGORIES {
            QuizScope::All
        } else {
            QuizScope::Category(id)
        }
    }
}

/// In-scope items whose id is not in `previous`, preserving input order.
pub fn remaining<'a, T: Identified>(in_scope: &'a [T], previous: &[DbId]) -> Vec<&'a T> {
    let served: HashSet<DbId> = previous.iter().copied().collect();
    in_scope
        .iter()
        .filter(|item| !served.contains(&item.id()))
        .collect()
}

/// Pick the next quiz item, or `None` once every in-scope item was served.
pub fn pick_next<'a, T, R>(in_scope: &'a [T], previous: &[DbId], rng: &mut R) -> Option<&'a T>
where
    T: Identified,
    R: Rng + ?Sized,
{
    remaining(in_scope, previous).choose(rng).copied()
}
