//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns, object::Rows},
};

/// Format rows as a rounded table; numeric columns listed in `right_aligned` are right-justified
pub fn format_table<T: Tabled>(data: &[T], right_aligned: &[usize]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table.with(Style::rounded());
    for col in right_aligned {
        table.with(Modify::new(Columns::new(*col..*col + 1)).with(Alignment::right()));
    }
    table.with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QueryDisplay, QueryResult, SeverityRowDisplay, ScanSummary, Severity};

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<QueryDisplay> = vec![];
        assert_eq!(format_table(&rows, &[]), "No results found.");
    }

    #[test]
    fn test_format_severity_rows() {
        let mut summary = ScanSummary::default();
        summary.record_result(Severity::Medium, true);
        let rows = SeverityRowDisplay::from_summary(&summary);

        let result = format_table(&rows, &[1, 2, 3]);

        assert!(result.contains("SEVERITY"));
        assert!(result.contains("TOTAL"));
        assert!(result.contains("Medium"));
        assert!(result.contains("Info"));
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }

    #[test]
    fn test_format_query_rows() {
        let query = QueryResult {
            name: "Stored_XSS".to_string(),
            severity: Some("3".to_string()),
            count: 12,
        };
        let rows = vec![QueryDisplay::new(Severity::High, &query)];

        let result = format_table(&rows, &[2]);

        assert!(result.contains("QUERY"));
        assert!(result.contains("Stored_XSS"));
        assert!(result.contains("12"));
    }
}
