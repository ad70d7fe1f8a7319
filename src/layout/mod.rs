pub mod breakpoint;
pub mod probe;
