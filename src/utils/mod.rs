pub mod date;
pub mod editor;
pub mod formatting;
pub mod path;
pub mod table;

pub use formatting::secs2hm;
