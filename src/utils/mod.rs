pub mod colors;
pub mod date;
pub mod table;
pub mod time;

pub use time::format_hm;
