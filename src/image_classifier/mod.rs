pub mod interface;
pub mod main;
