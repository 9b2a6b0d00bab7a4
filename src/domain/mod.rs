pub mod impact;
pub mod production;
pub mod status;
pub mod types;

pub use impact::*;
pub use production::*;
pub use status::*;
pub use types::*;
