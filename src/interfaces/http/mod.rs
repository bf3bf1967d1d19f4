pub mod router;

pub use router::build_router;
