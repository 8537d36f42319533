pub mod codes;
pub mod money;
