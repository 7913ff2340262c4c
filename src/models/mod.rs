pub mod financial;
pub mod formats;
pub mod pos;
pub mod roster;
pub mod template;

pub use financial::*;
pub use pos::*;
pub use roster::*;
pub use template::*;
