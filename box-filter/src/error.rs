/// Errors produced while turning user input into mask parameters.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("diameter must be an odd positive integer, got `{input}`")]
    InvalidDiameter { input: String },
    #[error("invalid radius `{input}`: {reason}")]
    InvalidRadius { input: String, reason: String },
}
