pub mod calendar_src;
pub mod date_arg;
