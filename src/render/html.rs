// file: src/render/html.rs
// description: html fragment and page rendering for result grids

use crate::controller::ViewModel;
use crate::render::ResultsView;

pub fn render_grid(view: &ResultsView) -> String {
    let mut html = String::from("<div class=\"results-grid\">\n");

    for card in &view.cards {
        html.push_str(&format!(
            "  <div class=\"result-card\">\n    <img src=\"{}\" alt=\"{}\">\n    <div class=\"result-info\">\n      <div class=\"similarity-score\">{}</div>\n    </div>\n  </div>\n",
            escape(&card.image_src),
            escape(&card.alt),
            escape(&card.caption),
        ));
    }

    html.push_str("</div>\n");
    html
}

/// Standalone page with the error banner and the results container.
pub fn render_page(title: &str, view_model: &ViewModel) -> String {
    let display = if view_model.error.visible {
        "block"
    } else {
        "none"
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<div id=\"error\" style=\"display: {}\">{}</div>\n<div id=\"results\">\n{}</div>\n</body>\n</html>\n",
        escape(title),
        display,
        escape(&view_model.error.message),
        render_grid(&view_model.results),
    )
}

/// Entity-encodes markup characters; the text itself is not otherwise changed.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchResult;
    use crate::render::ResultsRenderer;

    #[test]
    fn test_grid_markup() {
        let view = ResultsRenderer::default().render(&[SearchResult::new("a.jpg", 0.8765432)]);
        let html = render_grid(&view);

        assert_eq!(html.matches("class=\"result-card\"").count(), 1);
        assert!(html.contains("<img src=\"/images/a.jpg\" alt=\"Search result\">"));
        assert!(html.contains("<div class=\"similarity-score\">Similarity: 0.8765</div>"));
    }

    #[test]
    fn test_empty_grid() {
        let html = render_grid(&ResultsView::default());
        assert_eq!(html, "<div class=\"results-grid\">\n</div>\n");
    }

    #[test]
    fn test_attribute_quotes_encoded() {
        let view = ResultsRenderer::default().render(&[SearchResult::new("a\"b<c>.jpg", 0.1)]);
        let html = render_grid(&view);
        assert!(html.contains("src=\"/images/a&quot;b&lt;c&gt;.jpg\""));
    }

    #[test]
    fn test_page_error_banner() {
        let mut view_model = ViewModel::default();
        let html = render_page("Image Search", &view_model);
        assert!(html.contains("<div id=\"error\" style=\"display: none\"></div>"));

        view_model.error.show("An error occurred during search");
        let html = render_page("Image Search", &view_model);
        assert!(html.contains(
            "<div id=\"error\" style=\"display: block\">An error occurred during search</div>"
        ));
    }
}
