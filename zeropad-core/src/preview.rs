use crate::plan::Plan;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    List,
    Table,
    Summary,
    None,
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "list" => Ok(Self::List),
            "table" => Ok(Self::Table),
            "summary" => Ok(Self::Summary),
            "none" => Ok(Self::None),
            _ => Err(format!("Invalid preview format: {}", s)),
        }
    }
}

/// Determine whether to use colors based on explicit preference or terminal
/// detection.
pub fn should_use_color(use_color: Option<bool>) -> bool {
    match use_color {
        Some(explicit_color) => explicit_color,
        None => io::stdout().is_terminal(),
    }
}

/// Render the plan in the specified format.
pub fn render_plan(plan: &Plan, format: Preview, use_color: Option<bool>) -> String {
    let use_color = should_use_color(use_color);

    match format {
        Preview::List => render_list(plan, use_color),
        Preview::Table => render_table(plan, use_color),
        Preview::Summary => render_summary(plan),
        Preview::None => String::new(),
    }
}

/// Default dry-run view: one numbered line per planned rename.
fn render_list(plan: &Plan, use_color: bool) -> String {
    let mut output = String::new();

    if plan.renames.is_empty() {
        writeln!(output, "Nothing to rename in {}", plan.root.display()).unwrap();
        return output;
    }

    let header = format!(
        "Planned renames in {} (width {})",
        plan.root.display(),
        plan.width
    );
    if use_color {
        writeln!(output, "{}", AnsiColor::Cyan.bold().paint(header)).unwrap();
    } else {
        writeln!(output, "{}", header).unwrap();
    }

    for (index, rename) in plan.renames.iter().enumerate() {
        if use_color {
            writeln!(
                output,
                "{:>4}. {} -> {}",
                index + 1,
                rename.from,
                AnsiColor::Green.paint(&rename.to)
            )
            .unwrap();
        } else {
            writeln!(output, "{:>4}. {} -> {}", index + 1, rename.from, rename.to).unwrap();
        }
    }

    output
}

fn render_table(plan: &Plan, use_color: bool) -> String {
    let mut table = Table::new();

    if io::stdout().is_terminal() {
        table.set_content_arrangement(ContentArrangement::Dynamic);
    } else {
        table.set_content_arrangement(ContentArrangement::Disabled);
    }

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("#").fg(Color::Cyan),
            Cell::new("From").fg(Color::Cyan),
            Cell::new("To").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["#", "From", "To"]);
    }

    for (index, rename) in plan.renames.iter().enumerate() {
        if use_color {
            table.add_row(vec![
                Cell::new((index + 1).to_string()).fg(Color::Yellow),
                Cell::new(&rename.from),
                Cell::new(&rename.to).fg(Color::Magenta),
            ]);
        } else {
            table.add_row(vec![&(index + 1).to_string(), &rename.from, &rename.to]);
        }
    }

    table.to_string()
}

/// Machine-greppable key/value view.
fn render_summary(plan: &Plan) -> String {
    let mut output = String::new();

    writeln!(output, "[PLAN SUMMARY]").unwrap();
    writeln!(output, "Directory: {}", plan.root.display()).unwrap();
    writeln!(output, "Width: {}", plan.width).unwrap();
    writeln!(output, "Matched: {}", plan.matched).unwrap();
    writeln!(output, "Renames: {}", plan.renames.len()).unwrap();

    if !plan.renames.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "[RENAMES]").unwrap();
        for rename in &plan.renames {
            writeln!(output, "{} -> {}", rename.from, rename.to).unwrap();
        }
    }

    output
}
