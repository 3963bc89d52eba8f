use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Columns shown first in list tables, in this order. Others follow sorted.
const LEADING_COLUMNS: &[&str] = &[
    "id",
    "title",
    "label",
    "deadline",
    "owner_name",
    "full_name",
    "role_label",
    "file_name",
    "author_name",
    "content",
];

/// Columns left out of list tables; still present in json/raw output.
const HIDDEN_COLUMNS: &[&str] = &[
    "badge",
    "created_at",
    "updated_at",
    "description",
    "effective_status",
    "user_id",
    "task_id",
];

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_rows(&items)),
        Value::Object(map) => {
            let mut entries = map.into_iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| column_rank(&a.0).cmp(&column_rank(&b.0)).then(a.0.cmp(&b.0)));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&["field", "value"], &rows, table_options()))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_rows(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }
    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, table_options());
    }

    let headers = list_columns(items);
    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, table_options())
}

/// Union of keys across rows, minus hidden ones, leading columns first.
fn list_columns(items: &[Value]) -> Vec<String> {
    let mut headers = Vec::<String>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(|m| m.keys()) {
        if !HIDDEN_COLUMNS.contains(&key.as_str()) && !headers.contains(key) {
            headers.push(key.clone());
        }
    }
    headers.sort_by(|a, b| column_rank(a).cmp(&column_rank(b)).then(a.cmp(b)));
    headers
}

fn column_rank(key: &str) -> usize {
    LEADING_COLUMNS
        .iter()
        .position(|c| *c == key)
        .unwrap_or(LEADING_COLUMNS.len())
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => if *v { "yes" } else { "no" }.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => format!("[{} items]", items.len()),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
