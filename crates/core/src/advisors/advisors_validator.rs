use super::advisors_model::NewAdvisorProfile;
use crate::errors::{Error, Result};

const MAX_NAME_LEN: usize = 255;
const MAX_ADDRESS_LEN: usize = 255;
const SIN_LEN: usize = 9;
const MIN_PHONE_LEN: usize = 10;

/// Rule checker for a model type.
pub trait ModelValidator<T>: Send + Sync {
    /// Checks the rules in order and reports the first violation.
    fn validate(&self, model: &T) -> Result<()>;

    /// Like [`ModelValidator::validate`], but an absent model is a
    /// [`Error::NullInput`].
    fn validate_present<'a>(&self, model: Option<&'a T>) -> Result<&'a T> {
        let model = model.ok_or_else(|| Error::NullInput(self.null_message().to_string()))?;
        self.validate(model)?;
        Ok(model)
    }

    fn null_message(&self) -> &'static str {
        "Model cannot be null."
    }
}

/// Field rules for advisor profile input.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdvisorProfileValidator;

impl AdvisorProfileValidator {
    pub fn new() -> Self {
        Self
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

impl ModelValidator<NewAdvisorProfile> for AdvisorProfileValidator {
    fn validate(&self, model: &NewAdvisorProfile) -> Result<()> {
        if is_blank(&model.full_name) || char_len(&model.full_name) > MAX_NAME_LEN {
            return Err(Error::invalid(
                "FullName is required and must be less than 255 characters.",
            ));
        }

        if is_blank(&model.sin)
            || char_len(&model.sin) != SIN_LEN
            || !model.sin.chars().all(|c| c.is_ascii_digit())
        {
            return Err(Error::invalid("SIN is required, must be exactly 9 digits."));
        }

        if let Some(address) = model.address.as_deref().filter(|a| !is_blank(a)) {
            if char_len(address) > MAX_ADDRESS_LEN {
                return Err(Error::invalid("Address must be less than 255 characters."));
            }
        }

        if let Some(phone) = model.phone_number.as_deref().filter(|p| !is_blank(p)) {
            if char_len(phone) < MIN_PHONE_LEN {
                return Err(Error::invalid("PhoneNumber must be 10 characters or more."));
            }
        }

        Ok(())
    }

    fn null_message(&self) -> &'static str {
        "AdvisorProfile cannot be null."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn valid() -> NewAdvisorProfile {
        NewAdvisorProfile {
            full_name: "John Doe".to_string(),
            sin: "123456789".to_string(),
            address: Some("123 Main St".to_string()),
            phone_number: Some("1234567890".to_string()),
        }
    }

    fn message_for(model: NewAdvisorProfile) -> String {
        let err = AdvisorProfileValidator::new().validate(&model).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        err.to_string()
    }

    #[test]
    fn absent_model_is_null_input() {
        let err = AdvisorProfileValidator::new()
            .validate_present(None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullInput);
        assert_eq!(err.to_string(), "AdvisorProfile cannot be null.");
    }

    #[test]
    fn blank_full_name_is_rejected() {
        let model = NewAdvisorProfile {
            full_name: " ".to_string(),
            ..valid()
        };
        assert_eq!(
            message_for(model),
            "FullName is required and must be less than 255 characters."
        );
    }

    #[test]
    fn full_name_over_255_chars_is_rejected() {
        let model = NewAdvisorProfile {
            full_name: "A".repeat(256),
            ..valid()
        };
        assert_eq!(
            message_for(model),
            "FullName is required and must be less than 255 characters."
        );
    }

    #[test]
    fn full_name_of_exactly_255_chars_is_accepted() {
        let model = NewAdvisorProfile {
            full_name: "é".repeat(255),
            ..valid()
        };
        assert!(AdvisorProfileValidator::new().validate(&model).is_ok());
    }

    #[test]
    fn malformed_sins_are_rejected() {
        for sin in [" ", "", "12345678", "1234567899", "12345678A", "１２３４５６７８９"] {
            let model = NewAdvisorProfile {
                sin: sin.to_string(),
                ..valid()
            };
            assert_eq!(
                message_for(model),
                "SIN is required, must be exactly 9 digits.",
                "sin {:?}",
                sin
            );
        }
    }

    #[test]
    fn long_address_is_rejected() {
        let model = NewAdvisorProfile {
            address: Some("A".repeat(256)),
            ..valid()
        };
        assert_eq!(message_for(model), "Address must be less than 255 characters.");
    }

    #[test]
    fn short_phone_number_is_rejected() {
        let model = NewAdvisorProfile {
            phone_number: Some("123456789".to_string()),
            ..valid()
        };
        assert_eq!(message_for(model), "PhoneNumber must be 10 characters or more.");
    }

    #[test]
    fn blank_optional_fields_are_treated_as_absent() {
        let model = NewAdvisorProfile {
            address: Some("   ".to_string()),
            phone_number: Some(" ".to_string()),
            ..valid()
        };
        assert!(AdvisorProfileValidator::new().validate(&model).is_ok());
    }

    #[test]
    fn first_violation_wins() {
        let model = NewAdvisorProfile {
            full_name: String::new(),
            sin: "bad".to_string(),
            address: Some("A".repeat(300)),
            phone_number: Some("1".to_string()),
        };
        assert!(message_for(model).starts_with("FullName"));
    }

    #[test]
    fn valid_model_passes() {
        let model = valid();
        let validated = AdvisorProfileValidator::new()
            .validate_present(Some(&model))
            .unwrap();
        assert_eq!(validated, &model);
    }
}
