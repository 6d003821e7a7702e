pub mod products;
pub mod session;
