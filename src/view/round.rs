use crate::model::{RoundConfig, RoundState};

#[must_use]
pub fn render_start_screen(draft: &RoundConfig) -> String {
    let mut out = format!("Players: {}\n", draft.player_count());
    for (idx, name) in draft.player_names().iter().enumerate() {
        out.push_str(&format!("  {}. {name}\n", idx + 1));
    }
    out.push_str(&format!("Holes: {}\n", draft.hole_count()));
    out.push_str("Type `start` to begin the round.");
    out
}

/// Hole tabs, e.g. `[Hole 1] <Hole 2>` where the angle brackets mark the selected hole.
#[must_use]
pub fn render_hole_tabs(round: &RoundState) -> String {
    round
        .visible_holes()
        .iter()
        .map(|&hole| {
            if hole == round.current_hole() {
                format!("<Hole {}>", hole + 1)
            } else {
                format!("[Hole {}]", hole + 1)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn render_round_screen(round: &RoundState) -> String {
    let hole = round.current_hole();
    let par = round.par(hole).map_or_else(|_| "?".to_string(), |p| p.to_string());
    let mut out = format!("{}\nPar: {par}\n", render_hole_tabs(round));

    let names = round.config().player_names();
    let width = names.iter().map(String::len).max().unwrap_or(0);
    for (player, name) in names.iter().enumerate() {
        let strokes = round.stroke(player, hole).unwrap_or(1);
        let minus = if round.can_decrement(player, hole) { "-" } else { " " };
        out.push_str(&format!("  {}. {name:<width$}  {minus} {strokes} +\n", player + 1));
    }

    if round.is_final_hole() {
        out.push_str("Type `summary` to finish the round.");
    } else {
        out.push_str("Type `next` for the next hole.");
    }
    out
}
