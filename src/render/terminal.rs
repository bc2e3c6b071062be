// file: src/render/terminal.rs
// description: terminal listing of rendered result cards
// reference: uses colored for highlighted output

use crate::render::ResultsView;
use colored::Colorize;

pub fn render_list(view: &ResultsView, limit: Option<usize>) -> String {
    if view.is_empty() {
        return format!("{}\n", "No results".yellow());
    }

    let shown = limit.unwrap_or(view.len()).min(view.len());
    let mut output = format!("Found {} result(s)\n{}\n", view.len(), "=".repeat(80));

    for (idx, card) in view.cards.iter().take(shown).enumerate() {
        output.push_str(&format!(
            "\n{} {}\n   {}\n",
            format!("{}.", idx + 1).cyan().bold(),
            card.caption.green(),
            card.image_src
        ));
    }

    if shown < view.len() {
        output.push_str(&format!("\n... {} more\n", view.len() - shown));
    }

    output.push_str(&format!("\n{}\n", "=".repeat(80)));
    output
}
