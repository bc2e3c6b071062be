// file: src/controller/view.rs
// description: view model owned by the search controller
// reference: one field per element the page exposes

use crate::render::ResultsView;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ErrorBanner {
    pub message: String,
    pub visible: bool,
}

impl ErrorBanner {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.visible = true;
    }

    /// Hides the banner; the last message text stays behind it.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn shown(&self) -> Option<&str> {
        self.visible.then_some(self.message.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewModel {
    /// Read-only display of the chosen file name.
    pub file_display: String,
    pub error: ErrorBanner,
    /// Only present for layouts with slider value labels.
    pub weight_label: Option<String>,
    pub pca_label: Option<String>,
    pub results: ResultsView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_banner() {
        let mut banner = ErrorBanner::default();
        assert_eq!(banner.shown(), None);

        banner.show("Please select an image");
        assert_eq!(banner.shown(), Some("Please select an image"));

        banner.hide();
        assert_eq!(banner.shown(), None);
        assert_eq!(banner.message, "Please select an image");
    }
}
