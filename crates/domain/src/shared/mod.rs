pub mod entity;
pub mod weekday;
