//! CLI command handlers for libris
//!
//! One-shot subcommand handlers. Each business operation converts its own
//! domain errors (not found, validation, duplicate) into a printed failure
//! line; only I/O and storage failures propagate out of a handler.

pub mod book;
pub mod loan;
pub mod member;

pub use book::{handle_book_command, BookCommands};
pub use loan::{handle_loan_command, LoanCommands};
pub use member::{handle_member_command, MemberCommands};

use crate::error::{LibrisError, LibrisResult};

/// Print a recoverable domain error as a failure line; propagate the rest
pub(crate) fn report_failure(err: LibrisError) -> LibrisResult<()> {
    if err.is_recoverable() {
        println!("{}", err);
        Ok(())
    } else {
        Err(err)
    }
}
