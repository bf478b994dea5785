pub mod plural;
pub mod style;
pub mod terminal;
pub mod time;
