//! Loan display formatting

use tabled::{Table, Tabled};

use crate::models::Loan;

#[derive(Tabled)]
struct OverdueRow {
    #[tabled(rename = "Loan ID")]
    loan_id: String,
    #[tabled(rename = "Member ID")]
    member_id: String,
    #[tabled(rename = "ISBN")]
    isbn: String,
    #[tabled(rename = "Issued")]
    issue_date: String,
    #[tabled(rename = "Due")]
    due_date: String,
}

impl From<&Loan> for OverdueRow {
    fn from(loan: &Loan) -> Self {
        Self {
            loan_id: loan.loan_id.clone(),
            member_id: loan.member_id.clone(),
            isbn: loan.isbn.clone(),
            issue_date: loan.issue_date.to_string(),
            due_date: loan.due_date.to_string(),
        }
    }
}

/// Format the overdue listing as a table
pub fn format_overdue_list(loans: &[Loan]) -> String {
    if loans.is_empty() {
        return "No overdue loans.".to_string();
    }

    Table::new(loans.iter().map(OverdueRow::from)).to_string()
}
