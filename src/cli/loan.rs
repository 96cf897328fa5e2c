//! Loan CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_overdue_list;
use crate::error::{LibrisError, LibrisResult};
use crate::models::Loan;
use crate::services::CirculationService;
use crate::storage::Storage;

/// Loan subcommands
#[derive(Subcommand)]
pub enum LoanCommands {
    /// Issue a book to a member
    Issue {
        /// ISBN to issue
        isbn: String,
        /// Borrowing member's ID
        member_id: String,
    },
    /// Return a borrowed book
    Return {
        /// Loan ID to return
        loan_id: String,
    },
    /// List overdue loans
    Overdue,
}

/// Handle a loan command
pub fn handle_loan_command(
    storage: &Storage,
    settings: &Settings,
    cmd: LoanCommands,
) -> LibrisResult<()> {
    let service = CirculationService::new(storage, settings);

    match cmd {
        LoanCommands::Issue { isbn, member_id } => {
            match service.issue_book(&isbn, &member_id) {
                Ok(loan) => {
                    println!("Book issued. Due on {}.", loan.due_date);
                    println!("  Loan ID: {}", loan.loan_id);
                }
                Err(LibrisError::NotFound {
                    entity_type: "Book",
                    ..
                }) => {
                    println!("Book not available or ISBN not found.");
                }
                Err(err) => super::report_failure(err)?,
            }
        }

        LoanCommands::Return { loan_id } => match service.return_book(&loan_id) {
            Ok(loan) => {
                println!("Book returned successfully.");
                println!("  ISBN: {}", loan.isbn);
            }
            Err(LibrisError::NotFound {
                entity_type: "Loan",
                ..
            }) => {
                println!("Invalid Loan ID or book already returned.");
            }
            Err(err) => super::report_failure(err)?,
        },

        LoanCommands::Overdue => {
            let overdue: Vec<Loan> = service.overdue()?.collect();
            println!("{}", format_overdue_list(&overdue));
        }
    }

    Ok(())
}
