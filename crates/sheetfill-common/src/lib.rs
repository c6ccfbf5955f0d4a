pub mod range;
pub mod value;

pub use range::*;
pub use value::*;
