pub mod ai;
pub mod druid;
