pub mod eval;
pub mod parse;
pub mod validate;

pub use eval::evaluate;
pub use parse::{parse_amount, parse_numeral};
pub use validate::is_well_formed;
