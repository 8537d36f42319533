pub mod config;
pub mod controller;

pub use config::FieldConfig;
pub use controller::{FieldState, FieldUpdate, MoneyField, ValueChange};
