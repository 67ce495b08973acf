pub mod deposit;
pub mod initialize;
pub mod set_locked;
pub mod swap;
pub mod withdraw;

pub use deposit::*;
pub use initialize::*;
pub use set_locked::*;
pub use swap::*;
pub use withdraw::*;
