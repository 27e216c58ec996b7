pub mod progress;

use crate::raspi_os::{FieldAccessor, OsEntry};

/// A column of [`render_table`]: header label plus how to read the cell.
pub type Column = (&'static str, FieldAccessor);

/// Resolve column labels against [`OsEntry::FIELDS`]. Unknown labels are
/// skipped.
pub fn columns(labels: &[&str]) -> Vec<Column> {
    OsEntry::FIELDS
        .iter()
        .filter(|(label, _)| labels.contains(label))
        .copied()
        .collect()
}

/// Render `entries` as space-separated, left-aligned columns. With headers,
/// the label row is framed by dashed rules as wide as each column.
pub fn render_table(entries: &[OsEntry], columns: &[Column], show_headers: bool) -> String {
    let cells: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| columns.iter().map(|(_, read)| read(entry)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(idx, (label, _))| {
            cells
                .iter()
                .map(|row| row[idx].chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    if show_headers {
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let rule = rule.join(" ");
        let labels: Vec<&str> = columns.iter().map(|(label, _)| *label).collect();

        push_line(&mut out, &rule);
        push_line(&mut out, &join_padded(&labels, &widths));
        push_line(&mut out, &rule);
    }

    for row in &cells {
        push_line(&mut out, &join_padded(row, &widths));
    }

    out
}

/// Render one entry as a titled record: the `title` field first, then every
/// other field as an indented `- label: value` line with aligned labels.
pub fn render_record(entry: &OsEntry, title: &str) -> String {
    let width = OsEntry::FIELDS
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    if let Some(read) = OsEntry::field(title) {
        push_line(&mut out, &format!("{title}: {}", read(entry)));
    }

    for (label, read) in OsEntry::FIELDS.iter().filter(|(label, _)| *label != title) {
        push_line(&mut out, &format!("    - {label:<width$}: {}", read(entry)));
    }

    out
}

fn join_padded<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
