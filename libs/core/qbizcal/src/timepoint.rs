mod datelike;
mod parse;

pub use datelike::DateLike;
pub use parse::{parse_date, DateToken};
