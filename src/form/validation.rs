// file: src/form/validation.rs
// description: pre-submit checks on the search form
// reference: required text/image combinations per form variant

use crate::error::ValidationError;
use crate::models::{FormState, FormVariant, QueryType};

pub fn validate_form(variant: FormVariant, state: &FormState) -> Result<(), ValidationError> {
    match variant {
        FormVariant::QuerySelector => validate_query_type(state),
        FormVariant::Sliders => {
            if !state.has_text() && !state.has_image() {
                return Err(ValidationError::MissingAnyInput);
            }
            Ok(())
        }
    }
}

fn validate_query_type(state: &FormState) -> Result<(), ValidationError> {
    match state.query_type {
        QueryType::Text if !state.has_text() => Err(ValidationError::MissingTextQuery),
        QueryType::Image if !state.has_image() => Err(ValidationError::MissingImage),
        QueryType::Hybrid if !state.has_text() || !state.has_image() => {
            Err(ValidationError::MissingHybridInput)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::ImageFile;

    fn state(query_type: QueryType, text: &str, image: bool) -> FormState {
        let mut state = FormState::new(&Config::default_config().form);
        state.query_type = query_type;
        state.text_query = text.to_string();
        if image {
            state.image_file = Some(ImageFile::new("q.png", vec![0]));
        }
        state
    }

    #[test]
    fn test_selector_rejections() {
        let cases = [
            (QueryType::Text, "", false, ValidationError::MissingTextQuery),
            (QueryType::Text, "", true, ValidationError::MissingTextQuery),
            (QueryType::Image, "", false, ValidationError::MissingImage),
            (QueryType::Image, "cats", false, ValidationError::MissingImage),
            (QueryType::Hybrid, "", false, ValidationError::MissingHybridInput),
            (QueryType::Hybrid, "cats", false, ValidationError::MissingHybridInput),
            (QueryType::Hybrid, "", true, ValidationError::MissingHybridInput),
        ];

        for (query_type, text, image, expected) in cases {
            assert_eq!(
                validate_form(FormVariant::QuerySelector, &state(query_type, text, image)),
                Err(expected),
                "{query_type} text={text:?} image={image}"
            );
        }
    }

    #[test]
    fn test_selector_accepts_extra_input() {
        // Text search with a file chosen is allowed; the file is still sent.
        assert!(validate_form(FormVariant::QuerySelector, &state(QueryType::Text, "cats", true)).is_ok());
        assert!(validate_form(FormVariant::QuerySelector, &state(QueryType::Image, "cats", true)).is_ok());
        assert!(validate_form(FormVariant::QuerySelector, &state(QueryType::Hybrid, "cats", true)).is_ok());
    }

    #[test]
    fn test_sliders_need_any_input() {
        assert_eq!(
            validate_form(FormVariant::Sliders, &state(QueryType::Text, "", false)),
            Err(ValidationError::MissingAnyInput)
        );
        assert!(validate_form(FormVariant::Sliders, &state(QueryType::Text, "cats", false)).is_ok());
        assert!(validate_form(FormVariant::Sliders, &state(QueryType::Text, "", true)).is_ok());
    }
}
