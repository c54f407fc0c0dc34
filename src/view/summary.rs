use maud::{Markup, html};

use crate::model::{Summary, format_to_par};

const CELL: usize = 6;

#[must_use]
pub fn render_summary_text(summary: &Summary) -> String {
    let name_width = summary
        .player_names
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(CELL);

    let cells = |label: &str, par: &str, values: Vec<String>| {
        let mut line = format!("{label:<CELL$}{par:<CELL$}");
        for value in values {
            line.push_str(&format!("{value:>name_width$}"));
        }
        line
    };

    let mut lines = vec![cells("Hole", "Par", summary.player_names.clone())];
    for row in &summary.holes {
        lines.push(cells(
            &row.hole_number.to_string(),
            &row.par.strokes().to_string(),
            row.strokes.iter().map(ToString::to_string).collect(),
        ));
    }
    lines.push(cells(
        "Total",
        &summary.totals.total_par.to_string(),
        summary.totals.total_strokes.iter().map(ToString::to_string).collect(),
    ));
    lines.push(cells(
        "",
        "",
        summary.totals.to_par.iter().map(|diff| format_to_par(*diff)).collect(),
    ));
    lines.join("\n")
}

#[must_use]
pub fn render_summary_html(summary: &Summary) -> Markup {
    html! {
        h3 { "Summary" }
        table class="styled-table summary-table" {
            thead {
                tr {
                    th { "Hole" }
                    th { "Par" }
                    @for name in &summary.player_names {
                        th { (name) }
                    }
                }
            }
            tbody {
                @for row in &summary.holes {
                    tr data-hole=(row.hole_number) {
                        td { (row.hole_number) }
                        td { (row.par.strokes()) }
                        @for (strokes, display) in row.strokes.iter().zip(&row.score_display) {
                            td class=(display.class_name()) { (strokes) }
                        }
                    }
                }
            }
            tfoot {
                tr class="totals" {
                    td { "Total" }
                    td { (summary.totals.total_par) }
                    @for (total, diff) in summary.totals.total_strokes.iter().zip(&summary.totals.to_par) {
                        td title=(format_to_par(*diff)) { (total) }
                    }
                }
            }
        }
    }
}

/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_summary_json(summary: &Summary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
