//! Browser implementations of the collaborators used by the form core:
//! session identity, products collection, file storage, navigation and clock.

pub mod browser;
pub mod products;
pub mod session;
pub mod storage;
