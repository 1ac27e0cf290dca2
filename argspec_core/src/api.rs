mod core;
mod specification;
mod value;

pub use self::core::*;
pub use specification::*;
pub use value::*;
