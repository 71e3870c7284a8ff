pub mod factors;
pub mod fields;
pub mod health;
pub mod predict;
pub mod report;
