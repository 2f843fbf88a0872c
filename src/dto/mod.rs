pub mod health;
pub mod matches;
pub mod phase;
pub mod validation;
