//! Plain-text table rendering for [`ContentionReport`].

use contention_core::ContentionReport;

const NOT_SET: &str = "(not set)";

/// Render `report` as an aligned text table followed by a one-line summary.
///
/// Cells equal to the global maximum are suffixed with `*`. The summary names
/// how many buckets hit the peak and how many pairs touch one of them.
pub fn render_table(report: &ContentionReport) -> String {
    let mut header: Vec<String> = vec!["Mentee".into(), "Mentor".into(), "Call time".into()];
    header.extend(report.columns.iter().map(|c| format!("{c} min")));

    let rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                row.mentee.display_name().to_string(),
                row.mentor.display_name().to_string(),
                row.schedule_label.clone().unwrap_or_else(|| NOT_SET.into()),
            ];
            cells.extend(row.cells.iter().map(|c| {
                if c.is_peak {
                    format!("{}*", c.count)
                } else {
                    c.count.to_string()
                }
            }));
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 1);
    lines.push(format_line(&header, &widths));
    lines.extend(rows.iter().map(|row| format_line(row, &widths)));

    let mut out = lines.join("\n");
    out.push_str("\n\n");
    out.push_str(&summary(report));
    out.push('\n');
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    line.join("  ").trim_end().to_string()
}

fn summary(report: &ContentionReport) -> String {
    let mut text = format!(
        "{} one-on-one pairs ({} scheduled), peak concurrency {}",
        report.total, report.scheduled, report.global_max
    );
    if !report.peak_offsets.is_empty() {
        text.push_str(&format!(
            " in {} bucket(s) across {} pair(s)",
            report.peak_offsets.len(),
            report.peak_rows().count()
        ));
    }
    text
}
