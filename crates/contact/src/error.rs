#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("invalid email address")]
    InvalidEmail,
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(value: validator::ValidationErrors) -> Self {
        let mut fields = value
            .field_errors()
            .into_iter()
            .filter(|(_, errors)| errors.iter().any(|e| e.code == "length"))
            .map(|(field, _)| field.to_string())
            .collect::<Vec<_>>();

        if fields.is_empty() {
            return Self::InvalidEmail;
        }

        fields.sort();
        Self::MissingFields { fields }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransmissionError {
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("contact endpoint answered {0}")]
    Status(u16),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Transmission(#[from] TransmissionError),

    #[error("a submission is already in progress")]
    InFlight,
}

pub type Result<T> = std::result::Result<T, SubmitError>;
