#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 6;
const SEPARATOR: &str = "  ";

/// Render an aligned text table. Status labels are colored when enabled.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, headers, max_width);
    }

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, None))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = clip(row.get(index).map_or("-", String::as_str), *width);
                let color = if options.color { status_color(&cell) } else { None };
                pad(&cell, *width, color)
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest columns one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        match widest {
            Some(idx) => widths[idx] -= 1,
            None => break,
        }
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, color: Option<&str>) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    match color {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m{fill}"),
        None => format!("{value}{fill}"),
    }
}

/// ANSI color for effective-status labels and codes.
fn status_color(value: &str) -> Option<&'static str> {
    match value.to_ascii_lowercase().replace(' ', "_").as_str() {
        "overdue" => Some("31"),
        "completed_on_time" | "completed" => Some("32"),
        "completed_late" | "pending" => Some("33"),
        "in_progress" => Some("34"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> TableOptions {
        TableOptions {
            max_width: None,
            color: false,
        }
    }

    #[test]
    fn columns_align() {
        let rows = vec![
            vec!["tsk-1".to_string(), "Pending".to_string()],
            vec!["tsk-200".to_string(), "Completed On Time".to_string()],
        ];
        let table = render_entity_table(&["id", "label"], &rows, plain());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let label_col = lines[0].find("label").unwrap();
        assert_eq!(lines[2].find("Pending"), Some(label_col));
        assert_eq!(lines[3].find("Completed"), Some(label_col));
    }

    #[test]
    fn long_cells_are_clipped_to_max_width() {
        let rows = vec![vec!["tsk-1".to_string(), "x".repeat(80)]];
        let table = render_entity_table(
            &["id", "title"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        for line in table.lines() {
            assert!(line.chars().count() <= 40, "{line}");
        }
        assert!(table.contains('…'));
    }

    #[test]
    fn overdue_is_red_when_colored() {
        let rows = vec![vec!["Overdue".to_string()]];
        let table = render_entity_table(
            &["label"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[31mOverdue\u{1b}[0m"));
    }

    #[test]
    fn status_colors() {
        assert_eq!(status_color("Completed On Time"), Some("32"));
        assert_eq!(status_color("in_progress"), Some("34"));
        assert_eq!(status_color("tsk-1"), None);
    }
}
