//! Interactive librarian shell
//!
//! A menu loop over the six operations: add book, register member, issue,
//! return, overdue list, logout. Reads required fields with plain prompts
//! and prints one success or failure line per operation. Domain errors
//! never escape the loop; storage and I/O failures do.

use std::io::{self, Write};

use crate::config::Settings;
use crate::display::format_overdue_list;
use crate::error::{LibrisError, LibrisResult};
use crate::models::Loan;
use crate::services::{CatalogService, CirculationService, MembershipService};
use crate::storage::Storage;

/// Run the librarian menu until logout
pub fn run(storage: &Storage, settings: &Settings) -> LibrisResult<()> {
    loop {
        println!();
        println!("=== Librarian Dashboard ===");
        println!("1. Add Book");
        println!("2. Register Member");
        println!("3. Issue Book");
        println!("4. Return Book");
        println!("5. Overdue List");
        println!("6. Logout");

        let choice = prompt("> ")?;

        let outcome = match choice.as_str() {
            "1" => add_book(storage, settings),
            "2" => register_member(storage, settings),
            "3" => issue_book(storage, settings),
            "4" => return_book(storage, settings),
            "5" => view_overdue(storage, settings),
            "6" => {
                println!("Logging out...");
                return Ok(());
            }
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };

        // Domain errors become a failure line; everything else is fatal
        if let Err(err) = outcome {
            if err.is_recoverable() {
                println!("{}", err);
            } else {
                return Err(err);
            }
        }
    }
}

fn add_book(storage: &Storage, settings: &Settings) -> LibrisResult<()> {
    let isbn = prompt("Enter ISBN: ")?;
    let title = prompt("Enter Title: ")?;
    let author = prompt("Enter Author: ")?;
    let copies_input = prompt("Enter Total Copies: ")?;

    let copies: u32 = copies_input.parse().map_err(|_| {
        LibrisError::Validation(format!(
            "Total copies must be a non-negative integer, got '{}'",
            copies_input
        ))
    })?;

    let book = CatalogService::new(storage, settings).add_book(&isbn, &title, &author, copies)?;
    println!("Book '{}' added successfully.", book.title);
    Ok(())
}

fn register_member(storage: &Storage, settings: &Settings) -> LibrisResult<()> {
    let member_id = prompt("Enter Member ID: ")?;
    let name = prompt("Enter Name: ")?;
    let email = prompt("Enter Email: ")?;
    let password = rpassword::prompt_password("Enter Password: ")?;

    let member = MembershipService::new(storage, settings)
        .register_member(&member_id, &name, &email, &password)?;
    println!("Member '{}' registered successfully.", member.name);
    Ok(())
}

fn issue_book(storage: &Storage, settings: &Settings) -> LibrisResult<()> {
    let isbn = prompt("Enter ISBN to issue: ")?;
    let member_id = prompt("Enter Member ID: ")?;

    match CirculationService::new(storage, settings).issue_book(&isbn, &member_id) {
        Ok(loan) => {
            println!("Book issued. Due on {}.", loan.due_date);
            Ok(())
        }
        Err(LibrisError::NotFound {
            entity_type: "Book",
            ..
        }) => {
            println!("Book not available or ISBN not found.");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn return_book(storage: &Storage, settings: &Settings) -> LibrisResult<()> {
    let loan_id = prompt("Enter Loan ID to return: ")?;

    match CirculationService::new(storage, settings).return_book(&loan_id) {
        Ok(_) => {
            println!("Book returned successfully.");
            Ok(())
        }
        Err(LibrisError::NotFound {
            entity_type: "Loan",
            ..
        }) => {
            println!("Invalid Loan ID or book already returned.");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn view_overdue(storage: &Storage, settings: &Settings) -> LibrisResult<()> {
    let overdue: Vec<Loan> = CirculationService::new(storage, settings).overdue()?.collect();

    if !overdue.is_empty() {
        println!();
        println!("=== Overdue Loans ===");
    }
    println!("{}", format_overdue_list(&overdue));
    Ok(())
}

/// Read one trimmed line from stdin after printing a prompt
fn prompt(label: &str) -> LibrisResult<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
