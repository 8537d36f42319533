pub mod currency;
pub mod numbers;

pub use currency::{format_currency, strip_adornment};
pub use numbers::{format_amount, group_integer};
