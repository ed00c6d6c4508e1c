pub mod entities;
pub mod predicate;
