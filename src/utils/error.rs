use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Ticket type '{0}' already exists for this event")]
    DuplicateTicket(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Payment declined: {0}")]
    PaymentDeclined(String),

    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            AppError::DuplicateTicket(_) => "DUPLICATE_TICKET",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::PaymentDeclined(_) => "PAYMENT_DECLINED",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    pub fn log(&self) {
        match self {
            AppError::DuplicateEmail(msg)
            | AppError::DuplicateTicket(msg)
            | AppError::NotFound(msg)
            | AppError::PaymentDeclined(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::Io(e) => {
                error!(error = ?e, "I/O error");
            }
            AppError::Serialization(e) => {
                error!(error = ?e, "Serialization error");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(AppError::DuplicateEmail("a@b".into()).code(), "DUPLICATE_EMAIL");
        assert_eq!(AppError::NotFound("user 9".into()).code(), "NOT_FOUND");
    }
}
