//! Some utility functions

pub mod comparison;

use chrono::NaiveDate;

use crate::calendar::MonthGrid;
use crate::store::TaskStore;
use crate::task::Task;

/// A one-line, human-readable description of a task
pub fn format_task(task: &Task) -> String {
    let completion = if task.completed() { "✓" } else { " " };
    let mut line = format!("{} {}\t[{}] due {}", completion, task.name(), task.category(), task.due_date().format("%Y-%m-%d"));
    if let Some(details) = task.details() {
        line.push_str(" -- ");
        line.push_str(details);
    }
    line
}

/// Renders a month grid as text.
///
/// Days of other months are blank, days with pending tasks are followed by a `•`, and `today` is surrounded with brackets.
pub fn format_month_grid(grid: &MonthGrid, store: &TaskStore, today: NaiveDate) -> String {
    let mut out = format!("{:^35}\n", grid.title());
    for label in grid.header_labels() {
        out.push_str(&format!("{:^5}", label));
    }
    out.push('\n');

    for week in grid.weeks() {
        for cell in week {
            let text = if cell.in_month() == false {
                String::new()
            } else {
                let dot = if store.has_pending_tasks_on(cell.date()) { "•" } else { "" };
                match cell.is_today(today) {
                    true => format!("[{}]{}", cell.day(), dot),
                    false => format!("{}{}", cell.day(), dot),
                }
            };
            out.push_str(&format!("{:^5}", text));
        }
        out.push('\n');
    }
    out
}

/// A debug utility that pretty-prints tasks
pub fn print_tasks(tasks: &[&Task]) {
    for task in tasks {
        println!("    {}", format_task(task));
    }
}

/// A debug utility that pretty-prints a month grid
pub fn print_month_grid(grid: &MonthGrid, store: &TaskStore, today: NaiveDate) {
    print!("{}", format_month_grid(grid, store, today));
}
