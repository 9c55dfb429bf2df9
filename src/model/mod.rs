//! Pure data: the records the store serves and the session context the navigator reads.

pub mod product;
pub mod session;

pub use product::*;
pub use session::*;
