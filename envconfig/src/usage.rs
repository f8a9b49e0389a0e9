use crate::field::Field;

/// A leaf field paired with the key it resolves to under some prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Var {
    pub key: String,
    pub field: &'static Field,
}

impl Var {
    pub fn new(prefix: &str, field: &'static Field) -> Self {
        Self {
            key: field.key(prefix),
            field,
        }
    }
}

const HEADER: [&str; 5] = ["KEY", "TYPE", "DEFAULT", "REQUIRED", "DESCRIPTION"];
const GAP: usize = 4;

/// Renders a table of every variable, one row per field.
pub(crate) fn table(vars: &[Var]) -> String {
    let rows: Vec<[&str; 5]> = vars
        .iter()
        .map(|var| {
            [
                var.key.as_str(),
                var.field.ty,
                var.field.default.unwrap_or(""),
                if var.field.required { "true" } else { "" },
                var.field.desc.unwrap_or(""),
            ]
        })
        .collect();

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    std::iter::once(&HEADER)
        .chain(&rows)
        .map(|row| {
            let mut line = String::new();
            for (cell, width) in row.iter().zip(widths) {
                line.push_str(cell);
                line.push_str(&" ".repeat(width - cell.len() + GAP));
            }
            line.trim_end().to_owned()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one `KEY=default` line per field, like a `.env` file.
pub(crate) fn requirements(vars: &[Var]) -> String {
    vars.iter()
        .map(|var| format!("{}={}\n", var.key, var.field.default.unwrap_or("")))
        .collect()
}
