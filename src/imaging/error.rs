/// Errors raised when reading a shape attribute from an [`AttributeSource`](super::AttributeSource).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AttributeError {
    /// The attribute has neither a default value nor time samples.
    #[error("attribute `{0}` has no authored value")]
    Missing(String),
    /// The attribute holds a value of another type than the one requested.
    #[error("attribute `{name}` holds a {found}, expected a {expected}")]
    TypeMismatch {
        /// The attribute name.
        name: String,
        /// The type the reader asked for.
        expected: &'static str,
        /// The type of the stored value.
        found: &'static str,
    },
}
