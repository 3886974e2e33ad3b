//! Error types for the car mapper.

use thiserror::Error;

/// Errors that can occur while mapping between [`Car`](crate::model::Car)
/// and [`CarDto`](crate::model::CarDto).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MapperError {
    /// A string did not name any member of the target enumeration.
    ///
    /// Matching is exact and case-sensitive: `"sport"` is not `SPORT`.
    #[error("No enum constant {enum_name}.{value}")]
    UnknownEnumValue {
        enum_name: &'static str,
        value: String,
    },
}

impl MapperError {
    pub(crate) fn unknown_enum_value(enum_name: &'static str, value: impl Into<String>) -> Self {
        MapperError::UnknownEnumValue {
            enum_name,
            value: value.into(),
        }
    }
}
