use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PathError {
    #[error("Path parse error in '{0}': {1}")]
    Parse(String, String),

    #[error("Wildcard segment in '{0}' is only allowed in the innermost position")]
    WildcardPosition(String),

    #[error("Malformed {function} call: {message}")]
    MalformedCall { function: String, message: String },
}
