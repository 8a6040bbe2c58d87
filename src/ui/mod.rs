pub mod theme;
pub mod tooltips;
