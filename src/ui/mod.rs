pub mod panels;
pub mod roster;
