//! Book display formatting

use tabled::{Table, Tabled};

use crate::models::Book;

#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "ISBN")]
    isbn: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Total")]
    copies_total: u32,
    #[tabled(rename = "Available")]
    copies_available: u32,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            isbn: book.isbn.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            copies_total: book.copies_total,
            copies_available: book.copies_available,
        }
    }
}

/// Format the catalog as a table
pub fn format_book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books in the catalog.".to_string();
    }

    Table::new(books.iter().map(BookRow::from)).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_book_list(&[]), "No books in the catalog.");
    }

    #[test]
    fn test_table_contains_book_fields() {
        let books = vec![Book::new("0001", "Dune", "Frank Herbert", 3)];
        let output = format_book_list(&books);

        assert!(output.contains("ISBN"));
        assert!(output.contains("0001"));
        assert!(output.contains("Dune"));
        assert!(output.contains("Frank Herbert"));
    }
}
