pub mod counter;
pub mod occupancy;
pub mod table_filter;
pub mod user;
