use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use sw_store::EventLog;

pub fn add(file: &Path, message: &str) -> Result<(), String> {
    let log = EventLog::new(file);
    log.append(message).map_err(|e| e.to_string())?;
    println!("  Logged to {}", file.display());
    Ok(())
}

pub fn show(file: &Path, tail: Option<usize>) -> Result<(), String> {
    let log = EventLog::new(file);
    let entries = match tail {
        Some(count) => log.tail(count),
        None => log.entries(),
    }
    .map_err(|e| e.to_string())?;

    if entries.is_empty() {
        println!("  No entries.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["When", "Event"]);

    for entry in &entries {
        let (stamp, message) = split_entry(entry).unwrap_or(("", entry.as_str()));
        table.add_row(vec![stamp, message]);
    }

    println!("{table}");
    println!();
    println!("  {} entries", entries.len());

    Ok(())
}

/// Split a `[stamp] message` line into its two parts.
fn split_entry(entry: &str) -> Option<(&str, &str)> {
    entry.strip_prefix('[')?.split_once("] ")
}
