pub mod product;
pub mod site;

pub use product::*;
pub use site::*;
