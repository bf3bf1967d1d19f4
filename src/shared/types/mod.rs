pub mod pagination;

pub use pagination::Pager;
