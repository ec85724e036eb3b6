pub mod filter;
pub mod types;

pub use filter::{AssignmentFilter, UserQuery, UserRow, UserSort, UserView};
pub use types::{CounterAssignment, NewUser, Role, RoleChange, User, UserUpdate};
