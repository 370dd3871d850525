pub mod detail;
pub mod helpers;
pub mod register;
pub mod search;
