pub mod profile;
pub mod table;
pub mod tags;

pub use profile::{CurrencyPlacement, NumeralProfile, RoundingMode};
pub use table::{resolve_profile, resolve_tag};
pub use tags::LocaleId;
