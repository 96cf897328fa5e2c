//! Book CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_book_list;
use crate::error::LibrisResult;
use crate::services::CatalogService;
use crate::storage::Storage;

/// Book subcommands
#[derive(Subcommand)]
pub enum BookCommands {
    /// Add a book to the catalog
    Add {
        /// ISBN
        isbn: String,
        /// Book title
        title: String,
        /// Author name
        author: String,
        /// Number of copies the library owns
        #[arg(short, long, default_value = "1")]
        copies: u32,
    },
    /// List the catalog
    List,
}

/// Handle a book command
pub fn handle_book_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BookCommands,
) -> LibrisResult<()> {
    let service = CatalogService::new(storage, settings);

    match cmd {
        BookCommands::Add {
            isbn,
            title,
            author,
            copies,
        } => match service.add_book(&isbn, &title, &author, copies) {
            Ok(book) => {
                println!("Book '{}' added successfully.", book.title);
                println!("  ISBN: {}", book.isbn);
                println!("  Copies: {}", book.copies_total);
            }
            Err(err) => super::report_failure(err)?,
        },

        BookCommands::List => {
            let books = service.list_books()?;
            println!("{}", format_book_list(&books));
        }
    }

    Ok(())
}
