pub mod category;
pub mod descriptor;

pub use category::*;
pub use descriptor::*;
