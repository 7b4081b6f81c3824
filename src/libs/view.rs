use super::aggregator::AggregationTable;
use prettytable::{Cell, Row, Table};
use std::collections::BTreeSet;

pub const ISSUE_KEY_HEADER: &str = "Issue Key";

pub struct View {}

impl View {
    /// Prints an issue/column table. Cells holding several values span one
    /// line per value.
    pub fn table(table: &AggregationTable) {
        let mut output = Table::new();
        for line in Self::lines(table) {
            output.add_row(Row::new(line.iter().map(|value| Cell::new(value)).collect()));
        }
        output.printstd();
    }

    /// Header line followed by the body lines of the table.
    ///
    /// The first line of every issue carries its key; further lines of the
    /// same issue hold the second, third, ... value of each column.
    pub fn lines(table: &AggregationTable) -> Vec<Vec<String>> {
        let columns = Self::columns(table);

        let mut header = vec![ISSUE_KEY_HEADER.to_string()];
        header.extend(columns.iter().cloned());
        let mut lines = vec![header];

        for (issue_key, days) in table {
            let height = days.values().map(Vec::len).max().unwrap_or(0).max(1);

            for index in 0..height {
                let mut line = vec![if index == 0 { issue_key.clone() } else { String::new() }];
                line.extend(
                    columns
                        .iter()
                        .map(|column| days.get(column).and_then(|values| values.get(index)).cloned().unwrap_or_default()),
                );
                lines.push(line);
            }
        }

        lines
    }

    /// Distinct column keys, in numeric order when all of them are numbers
    /// and in lexical order otherwise.
    pub fn columns(table: &AggregationTable) -> Vec<String> {
        let unique: BTreeSet<&String> = table.values().flat_map(|days| days.keys()).collect();
        let mut columns: Vec<String> = unique.into_iter().cloned().collect();

        if columns.iter().all(|column| column.parse::<u32>().is_ok()) {
            columns.sort_by_key(|column| column.parse::<u32>().unwrap_or(0));
        }

        columns
    }
}
