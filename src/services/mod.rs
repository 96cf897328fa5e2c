//! Service layer for libris
//!
//! The service layer provides the business operations on top of the storage
//! layer: adding books, registering members, and running the loan
//! lifecycle. Every operation loads the collections it touches in full,
//! mutates in memory, and rewrites the backing files in full.

pub mod catalog;
pub mod circulation;
pub mod membership;

pub use catalog::CatalogService;
pub use circulation::CirculationService;
pub use membership::MembershipService;
