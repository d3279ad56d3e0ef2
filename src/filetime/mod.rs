pub mod convert;
pub mod local;
