pub mod crop;
pub mod detail;
pub mod document;
pub mod options;
pub mod variety;
