use crate::report::types::ReportRow;

const COLUMN_SEPARATOR: &str = "  ";
const MIN_HEADER_PADDING: usize = 2;

struct TableColumn {
    header: String,
    cells: Vec<String>,
    numeric: bool,
}

impl TableColumn {
    fn width(&self) -> usize {
        let widest = self.cells.iter().map(|c| c.chars().count()).max().unwrap_or(0);
        widest.max(self.header.chars().count() + MIN_HEADER_PADDING)
    }

    fn pad(&self, value: &str, width: usize) -> String {
        if self.numeric {
            format!("{value:>width$}")
        } else {
            format!("{value:<width$}")
        }
    }
}

/// Renders rows as a plain-text table with a leading row-index column.
///
/// Numeric columns are right-aligned on the decimal point, text columns are
/// left-aligned, and each header is underlined with dashes. No trailing newline.
pub fn render_table(headers: &[&str], rows: &[ReportRow]) -> String {
    let mut columns = Vec::with_capacity(headers.len() + 1);

    if !rows.is_empty() {
        columns.push(TableColumn {
            header: String::new(),
            cells: (0..rows.len()).map(|i| i.to_string()).collect(),
            numeric: true,
        });
    }

    for (idx, header) in headers.iter().enumerate() {
        let cells: Vec<_> = rows.iter().map(|row| row.get(idx)).collect();
        let numeric = !cells.is_empty() && cells.iter().all(|c| c.is_some_and(|c| c.is_numeric()));

        let mut text: Vec<String> = cells
            .iter()
            .map(|c| c.map(ToString::to_string).unwrap_or_default())
            .collect();

        if numeric {
            align_decimals(&mut text);
        }

        columns.push(TableColumn {
            header: header.to_string(),
            cells: text,
            numeric,
        });
    }

    let widths: Vec<usize> = columns.iter().map(TableColumn::width).collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);

    lines.push(join_line(
        columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| col.pad(&col.header, *w)),
    ));
    lines.push(join_line(widths.iter().map(|w| "-".repeat(*w))));

    for row in 0..rows.len() {
        lines.push(join_line(
            columns
                .iter()
                .zip(&widths)
                .map(|(col, w)| col.pad(&col.cells[row], *w)),
        ));
    }

    lines.join("\n")
}

fn join_line(cells: impl Iterator<Item = String>) -> String {
    let line = cells.collect::<Vec<_>>().join(COLUMN_SEPARATOR);
    line.trim_end().to_string()
}

/// Pads fractional parts so decimal points line up once right-aligned.
fn align_decimals(cells: &mut [String]) {
    let fraction_len = |s: &str| s.find('.').map(|p| s.len() - p).unwrap_or(0);
    let widest = cells.iter().map(|c| fraction_len(c)).max().unwrap_or(0);

    for cell in cells.iter_mut() {
        let pad = widest - fraction_len(cell);
        cell.push_str(&" ".repeat(pad));
    }
}
