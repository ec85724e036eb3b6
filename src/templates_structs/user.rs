use askama::Template;

use crate::models::counter::Counter;
use crate::models::occupancy::OccupiedCounter;
use crate::models::user::User;
use super::PageContext;

pub struct CounterChoice {
    pub counter: Counter,
    /// The subject's current counter.
    pub current: bool,
}

#[derive(Template)]
#[template(path = "users/loket.html")]
pub struct LoketTemplate {
    pub ctx: PageContext,
    pub user: Option<User>,
    pub current_counter: Option<Counter>,
    pub available: Vec<CounterChoice>,
    pub occupied: Vec<OccupiedCounter>,
    pub load_error: Option<String>,
}

#[derive(Template)]
#[template(path = "users/trashed.html")]
pub struct TrashTemplate {
    pub ctx: PageContext,
    pub search: String,
    pub users: Vec<User>,
    pub total_count: usize,
    pub load_error: Option<String>,
}
