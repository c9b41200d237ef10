pub mod elastic;
pub mod query;
