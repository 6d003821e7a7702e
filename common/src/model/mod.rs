pub mod identity;
pub mod product;
