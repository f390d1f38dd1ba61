use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid date '{value}', use DD.MM.YYYY")]
    InvalidDate { value: String },

    #[error("Not enough arguments. Usage: {usage}")]
    MissingArgument { usage: String },

    #[error("Unrecognised argument '{argument}'. Usage: {usage}")]
    UnknownArgument { argument: String, usage: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BookError {
    pub fn contact_not_found(name: &str) -> Self {
        BookError::NotFound {
            entity_type: "Contact".into(),
            id: name.to_string(),
        }
    }

    pub fn phone_not_found(phone: &str) -> Self {
        BookError::NotFound {
            entity_type: "Phone".into(),
            id: phone.to_string(),
        }
    }
}

pub type BookResult<T> = Result<T, BookError>;
