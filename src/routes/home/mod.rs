mod get;
mod page;

pub use get::*;
pub use page::*;
