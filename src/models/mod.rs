//! Core data models for libris
//!
//! This module contains the data structures that represent the catalog
//! domain: books, members, and loans. Field order on each struct matches the
//! column order of its backing CSV file and must not be rearranged.

pub mod book;
pub mod loan;
pub mod member;

pub use book::Book;
pub use loan::Loan;
pub use member::Member;
