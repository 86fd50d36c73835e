pub mod label;
pub mod main;
pub mod normalize;
pub mod prediction_table;
