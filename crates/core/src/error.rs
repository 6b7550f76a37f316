// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hotel_booking_domain::DomainError;

/// Errors raised while assembling requests or changing booking state.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// One or more required fields were empty after trimming.
    MissingFields(Vec<&'static str>),
    /// A field was present but held an unacceptable value.
    InvalidField {
        /// Wire name of the offending field.
        field: &'static str,
        /// The underlying rule that failed.
        error: DomainError,
    },
}

impl CoreError {
    /// Returns the wire names of every field this error concerns.
    ///
    /// Date range violations are reported against both dates.
    #[must_use]
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::DomainViolation(DomainError::InvalidRange { .. }) => {
                vec!["start_date", "end_date"]
            }
            Self::DomainViolation(_) => Vec::new(),
            Self::MissingFields(fields) => fields.clone(),
            Self::InvalidField { field, .. } => vec![*field],
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::MissingFields(fields) => write!(
                f,
                "Please fill in the following required fields: {}",
                fields.join(", ")
            ),
            Self::InvalidField { field, error } => write!(f, "Invalid {field}: {error}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
