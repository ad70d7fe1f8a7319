pub mod parallax;
pub mod text;
