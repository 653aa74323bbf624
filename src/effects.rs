pub mod blend;
pub mod transition;
