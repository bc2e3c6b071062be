// file: src/form/payload.rs
// description: assembles the multipart search payload from form state
// reference: conditional field presence per form variant

use crate::models::request::{
    FIELD_IMAGE_QUERY, FIELD_NUM_COMPONENTS, FIELD_QUERY_TYPE, FIELD_TEXT_QUERY,
    FIELD_TEXT_WEIGHT, FIELD_USE_PCA,
};
use crate::models::{FormState, FormVariant, QueryType, SearchRequest};

/// Builds the request for an already validated form.
pub fn build_request(variant: FormVariant, state: &FormState) -> SearchRequest {
    let mut request = SearchRequest::new();

    if state.has_text() {
        request.push_text(FIELD_TEXT_QUERY, state.text_query.clone());
    }

    if let Some(file) = &state.image_file {
        request.push_file(FIELD_IMAGE_QUERY, file.clone());
    }

    match variant {
        FormVariant::QuerySelector => {
            if state.query_type == QueryType::Hybrid {
                request.push_text(FIELD_TEXT_WEIGHT, state.text_weight.display_value());
            }
            request.push_text(FIELD_USE_PCA, state.use_pca.to_string());
            request.push_text(FIELD_NUM_COMPONENTS, state.num_components.display_value());
            request.push_text(FIELD_QUERY_TYPE, state.query_type.as_str());
        }
        FormVariant::Sliders => {
            request.push_text(FIELD_TEXT_WEIGHT, state.text_weight.display_value());
            request.push_text(FIELD_NUM_COMPONENTS, state.num_components.display_value());
        }
    }

    request
}
