// file: src/controller/search.rs
// description: search form controller driving validation, requests and rendering
// reference: sequence numbers discard completions from superseded requests

use crate::client::SearchTransport;
use crate::config::FormConfig;
use crate::controller::{Phase, ViewModel};
use crate::error::{Result, SearchError, ValidationError};
use crate::form::{build_request, validate_form};
use crate::models::{FormState, FormVariant, ImageFile, QueryType, SearchRequest, SearchResponse};
use crate::render::ResultsRenderer;
use tracing::{debug, info, warn};

pub const SEARCH_FAILED_MESSAGE: &str = "An error occurred during search";

/// A request that passed validation and is waiting for its response.
#[derive(Debug, Clone)]
pub struct PendingSearch {
    pub seq: u64,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    Rendered { seq: u64, count: usize },
    Failed { seq: u64 },
    Stale { seq: u64 },
}

#[derive(Debug, Clone)]
pub struct SearchController {
    variant: FormVariant,
    form: FormState,
    view: ViewModel,
    phase: Phase,
    renderer: ResultsRenderer,
    latest_seq: u64,
    latest_settled: bool,
}

impl SearchController {
    /// `config` is expected to have passed `Config::validate`; a range that
    /// did not is pinned to its minimum rather than rejected.
    pub fn new(config: &FormConfig, renderer: ResultsRenderer) -> Self {
        let form = FormState::new(config);
        let mut view = ViewModel::default();

        if config.variant.has_slider_labels() {
            view.weight_label = Some(form.text_weight.display_value());
            view.pca_label = Some(form.num_components.display_value());
        }

        Self {
            variant: config.variant,
            form,
            view,
            phase: Phase::Idle,
            renderer,
            latest_seq: 0,
            latest_settled: true,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn set_query_type(&mut self, query_type: QueryType) {
        self.form.query_type = query_type;
    }

    pub fn set_text_query(&mut self, text: impl Into<String>) {
        self.form.text_query = text.into();
    }

    pub fn set_use_pca(&mut self, use_pca: bool) {
        self.form.use_pca = use_pca;
    }

    pub fn on_file_change(&mut self, file: Option<ImageFile>) {
        self.view.file_display = file.as_ref().map(|f| f.name.clone()).unwrap_or_default();
        self.form.image_file = file;
    }

    pub fn on_weight_input(&mut self, value: f64) {
        self.form.text_weight.set(value);
        if self.variant.has_slider_labels() {
            self.view.weight_label = Some(self.form.text_weight.display_value());
        }
    }

    pub fn on_components_input(&mut self, value: f64) {
        self.form.num_components.set(value);
        if self.variant.has_slider_labels() {
            self.view.pca_label = Some(self.form.num_components.display_value());
        }
    }

    /// Validates the form and issues a new sequence number. A validation
    /// failure is shown in the banner and returned as `SearchError::Validation`.
    pub fn begin_submit(&mut self) -> Result<PendingSearch> {
        self.view.error.hide();
        self.move_to(Phase::Validating)?;

        if let Err(invalid) = validate_form(self.variant, &self.form) {
            debug!("Submit rejected: {}", invalid);
            self.view.error.show(invalid.to_string());
            self.move_to(Phase::Error)?;
            return Err(invalid.into());
        }

        let request = build_request(self.variant, &self.form);
        self.latest_seq += 1;
        self.latest_settled = false;
        self.move_to(Phase::Requesting)?;

        debug!("Issued search #{}", self.latest_seq);
        Ok(PendingSearch {
            seq: self.latest_seq,
            request,
        })
    }

    /// Applies a response if `seq` is the latest issued request.
    pub fn complete(&mut self, seq: u64, outcome: Result<SearchResponse>) -> Result<SubmitOutcome> {
        if seq != self.latest_seq || self.latest_settled {
            debug!(
                "Discarding stale completion #{} (latest #{})",
                seq, self.latest_seq
            );
            return Ok(SubmitOutcome::Stale { seq });
        }
        self.latest_settled = true;

        match outcome {
            Ok(response) => {
                self.move_to(Phase::Rendering)?;
                self.view.results = self.renderer.render(&response.results);
                self.move_to(Phase::Idle)?;

                info!("Rendered {} result(s) for search #{}", response.len(), seq);
                Ok(SubmitOutcome::Rendered {
                    seq,
                    count: response.len(),
                })
            }
            Err(err) => {
                warn!("Search #{} failed: {}", seq, err);
                self.view.error.show(SEARCH_FAILED_MESSAGE);
                if self.phase != Phase::Error {
                    self.move_to(Phase::Error)?;
                }
                Ok(SubmitOutcome::Failed { seq })
            }
        }
    }

    pub async fn submit<T>(&mut self, transport: &T) -> Result<SubmitOutcome>
    where
        T: SearchTransport + ?Sized,
    {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(SearchError::Validation(invalid)) => return Ok(SubmitOutcome::Rejected(invalid)),
            Err(e) => return Err(e),
        };

        let outcome = transport.search(&pending.request).await;
        self.complete(pending.seq, outcome)
    }

    fn move_to(&mut self, next: Phase) -> Result<()> {
        self.phase = self.phase.transition(next)?;
        Ok(())
    }
}
