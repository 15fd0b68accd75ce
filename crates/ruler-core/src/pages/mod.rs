//! UI pages.

pub mod page;
mod ruler;

pub use page::Page;
pub use ruler::RulerPage;
