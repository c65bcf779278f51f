//! Prints the current month with its pending-task indicators, and the task list.
//!
//! Set the RUST_LOG environment variable (e.g. `RUST_LOG=debug`) to see what the store does.
//! An optional argument gives the path to a JSON settings file.

use std::path::Path;

use chrono::{Duration, Local};

use todo_calendar::config::Settings;
use todo_calendar::utils::{print_month_grid, print_tasks};
use todo_calendar::{MonthGrid, StatusFilter, TaskStore};


fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        None => Settings::default(),
        Some(path) => match Settings::from_file(Path::new(&path)) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Invalid settings file: {}. Using the default settings", err);
                Settings::default()
            },
        },
    };
    let locale = match settings.calendar_locale() {
        Ok(locale) => locale,
        Err(err) => {
            log::warn!("{}. Using the default locale", err);
            Default::default()
        },
    };

    let mut store = TaskStore::with_settings(&settings);
    store.subscribe(|event| log::info!("{}", event));

    let now = Local::now().naive_local();
    let today = now.date();
    let category = store.categories().first().map(|c| c.name().to_string()).unwrap_or_default();

    store.add_task("Water the plants".to_string(), now, category.clone(), None);
    let done = store.add_task("Send the invoice".to_string(), now, category.clone(), Some("Before noon".to_string()));
    store.add_task("Book the train".to_string(), now + Duration::days(3), category, None);
    if let Err(err) = store.toggle_completion(&done) {
        log::error!("{}", err);
    }

    match MonthGrid::new(today, &locale) {
        Some(grid) => print_month_grid(&grid, &store, today),
        None => log::error!("Unable to build the grid of the current month"),
    }
    println!();

    store.set_filter(StatusFilter::Pending);
    println!("{} tasks:", store.selected_filter());
    print_tasks(&store.filtered_tasks());

    println!("Due today:");
    print_tasks(&store.pending_tasks_on(today));
}
