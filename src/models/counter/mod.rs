pub mod filter;
pub mod group;
pub mod types;

pub use filter::{CounterQuery, CounterSort, CounterView};
pub use group::{Group, group_by_first_word};
pub use types::{Counter, QuotaBucket};
