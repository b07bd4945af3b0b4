pub mod constants;
pub mod terminal;
