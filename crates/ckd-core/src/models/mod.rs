pub mod categorical;
pub mod patient;
pub mod specific_gravity;
