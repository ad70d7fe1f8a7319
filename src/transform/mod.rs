pub mod css;
pub mod initial;
