//! Which counters are free for a given user to take.
//!
//! A counter belongs to at most one active user. When editing the assignment of
//! one user (the subject), every counter already claimed by *another* active
//! user is occupied; everything else, including the subject's own counter, is
//! available.

use std::collections::HashMap;

use super::counter::Counter;
use super::user::User;

/// A counter held by someone other than the subject.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupiedCounter {
    pub counter: Counter,
    pub occupant_id: i64,
    pub occupant_name: String,
}

/// Partition of all counters, input order preserved within each side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Occupancy {
    pub available: Vec<Counter>,
    pub occupied: Vec<OccupiedCounter>,
}

impl Occupancy {
    pub fn occupant_of(&self, counter_id: i64) -> Option<&OccupiedCounter> {
        self.occupied.iter().find(|o| o.counter.id == counter_id)
    }
}

/// Map counter_id -> claiming user for every active user except `exclude`.
pub fn claimed_counters(users: &[User], exclude: Option<i64>) -> HashMap<i64, &User> {
    users
        .iter()
        .filter(|u| u.is_active() && Some(u.id) != exclude)
        .filter_map(|u| u.counter_id.map(|cid| (cid, u)))
        .collect()
}

/// Split `counters` into available / occupied from the point of view of `subject_id`.
pub fn resolve(users: &[User], counters: &[Counter], subject_id: i64) -> Occupancy {
    let claimed = claimed_counters(users, Some(subject_id));
    let mut out = Occupancy::default();
    for counter in counters {
        match claimed.get(&counter.id) {
            Some(occupant) => out.occupied.push(OccupiedCounter {
                counter: counter.clone(),
                occupant_id: occupant.id,
                occupant_name: occupant.name.clone(),
            }),
            None => out.available.push(counter.clone()),
        }
    }
    out
}

/// Number of counters nobody active holds.
pub fn free_count(users: &[User], counters: &[Counter]) -> usize {
    let claimed = claimed_counters(users, None);
    counters.iter().filter(|c| !claimed.contains_key(&c.id)).count()
}
