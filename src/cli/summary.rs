use crate::cli::archive::{archive_files, ensure_data_dir};
use crate::cli::report::{print_totals_tables, print_transaction_tables};
use crate::cli::{info, warn};
use crate::error::Result;
use crate::importer::{discover_files, load_statements};
use crate::reports::{filter_month, get_totals, Month};
use crate::settings::load_settings;
use crate::whitelist::Whitelists;

fn resolve_month(arg: Option<&str>) -> Month {
    let default = Month::current();
    match arg.and_then(Month::parse) {
        Some(month) => month,
        None => {
            info(format!(
                "Did not provide valid month in CLI... defaulting to month: {default}"
            ));
            default
        }
    }
}

pub fn run(month: Option<&str>, clean: bool) -> Result<()> {
    let settings = load_settings()?;
    let whitelist_dir = settings.whitelist_dir();
    let lists = Whitelists::load(whitelist_dir.as_deref())?;

    let month = resolve_month(month);

    let data_dir = settings.data_dir();
    if ensure_data_dir(&data_dir)? {
        info(format!("Created data path: {}", data_dir.display()));
    }

    let desktop = settings.desktop_dir()?;
    let files = discover_files(&desktop)?;
    for file in files.iter().filter(|f| f.institution.is_none()) {
        warn(format!("Not a known statement export: {}", file.file_name()));
    }

    let ledger = load_statements(&files, &lists)?;
    let ledger = filter_month(&ledger, month);
    println!();

    print_transaction_tables(&ledger);
    print_totals_tables(&get_totals(&ledger));

    if clean {
        let moved = archive_files(&files, &data_dir)?;
        info(format!(
            "Moved {} data files from \"{}\" to \"{}\"",
            moved.len(),
            desktop.display(),
            data_dir.display()
        ));
    }

    Ok(())
}
