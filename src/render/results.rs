// file: src/render/results.rs
// description: converts search results into a grid of result cards
// reference: one card per result, backend order preserved

use crate::models::SearchResult;
use serde::Serialize;

pub const DEFAULT_IMAGE_BASE: &str = "/images/";
pub const RESULT_ALT_TEXT: &str = "Search result";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub image_path: String,
    pub image_src: String,
    pub alt: String,
    pub caption: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsView {
    pub cards: Vec<ResultCard>,
}

impl ResultsView {
    /// Recovers the result records the view was rendered from.
    pub fn to_results(&self) -> Vec<SearchResult> {
        self.cards
            .iter()
            .map(|card| SearchResult::new(card.image_path.clone(), card.similarity))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ResultsRenderer {
    image_base: String,
}

impl Default for ResultsRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE)
    }
}

impl ResultsRenderer {
    pub fn new(image_base: impl Into<String>) -> Self {
        Self {
            image_base: image_base.into(),
        }
    }

    /// Builds a fresh view; nothing from a previous render carries over.
    pub fn render(&self, results: &[SearchResult]) -> ResultsView {
        ResultsView {
            cards: results.iter().map(|r| self.card(r)).collect(),
        }
    }

    fn card(&self, result: &SearchResult) -> ResultCard {
        ResultCard {
            image_path: result.image_path.clone(),
            // path is concatenated as-is
            image_src: format!("{}{}", self.image_base, result.image_path),
            alt: RESULT_ALT_TEXT.to_string(),
            caption: format!("Similarity: {}", result.format_similarity()),
            similarity: result.similarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_result_card() {
        let view = ResultsRenderer::default().render(&[SearchResult::new("a.jpg", 0.8765432)]);

        assert_eq!(view.len(), 1);
        assert_eq!(view.cards[0].image_src, "/images/a.jpg");
        assert_eq!(view.cards[0].caption, "Similarity: 0.8765");
        assert_eq!(view.cards[0].alt, "Search result");
    }

    #[test]
    fn test_caption_rounds_ties_up() {
        let view = ResultsRenderer::default().render(&[
            SearchResult::new("a.jpg", 0.03125),
            SearchResult::new("b.jpg", 0.15625),
            SearchResult::new("c.jpg", 0.28125),
        ]);

        let captions: Vec<&str> = view.cards.iter().map(|c| c.caption.as_str()).collect();
        assert_eq!(
            captions,
            vec!["Similarity: 0.0313", "Similarity: 0.1563", "Similarity: 0.2813"]
        );
    }

    #[test]
    fn test_empty_results() {
        let view = ResultsRenderer::default().render(&[]);
        assert!(view.is_empty());
    }

    #[test]
    fn test_render_is_idempotent_and_ordered() {
        let renderer = ResultsRenderer::default();
        let results = vec![
            SearchResult::new("z.jpg", 0.1),
            SearchResult::new("a.jpg", 0.9),
        ];

        let first = renderer.render(&results);
        let second = renderer.render(&results);
        assert_eq!(first, second);
        assert_eq!(second.to_results(), results);
        assert_eq!(second.len(), 2);
        assert_eq!(second.cards[0].image_src, "/images/z.jpg");
        assert_eq!(second.cards[1].image_src, "/images/a.jpg");
    }

    #[test]
    fn test_path_not_escaped() {
        let renderer = ResultsRenderer::new("http://host:5000/images/");
        let view = renderer.render(&[SearchResult::new("sub dir/../x?.jpg", 0.5)]);
        assert_eq!(view.cards[0].image_src, "http://host:5000/images/sub dir/../x?.jpg");
    }
}
