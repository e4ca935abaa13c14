pub mod place;
pub mod row;
