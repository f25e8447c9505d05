//! Daily note naming, seeding and summary extraction.

use chrono::NaiveDate;

/// Heading word that opens the section printed by `standup`.
pub const SUMMARY_HEADING: &str = "Summary";

/// Lines shown after each summary heading.
pub const SUMMARY_CONTEXT_LINES: usize = 50;

/// Sections written to a freshly created template.
pub const DEFAULT_TEMPLATE: &str = "## ToDo\n## Notes\n## Summary\n";

/// File name of the daily note for `date`, e.g. `2022-05-01.md`.
pub fn daily_note_file_name(date: NaiveDate) -> String {
    format!("{}.md", date.format("%Y-%m-%d"))
}

/// Contents of a new daily note: a level-1 date heading, then the template.
pub fn seed_daily_note(date: NaiveDate, template: &str) -> String {
    format!("# {}\n{template}", date.format("%Y-%m-%d"))
}

/// Extracts the summary part of a note.
///
/// Every line containing [`SUMMARY_HEADING`] opens a window over the next
/// [`SUMMARY_CONTEXT_LINES`] lines. Lines inside any window are kept unless
/// they contain the heading word themselves.
pub fn summary_section(note: &str) -> String {
    let mut remaining = 0usize;
    let mut kept = Vec::new();

    for line in note.lines() {
        if line.contains(SUMMARY_HEADING) {
            remaining = SUMMARY_CONTEXT_LINES;
            continue;
        }
        if remaining > 0 {
            kept.push(line);
            remaining -= 1;
        }
    }

    kept.join("\n")
}
