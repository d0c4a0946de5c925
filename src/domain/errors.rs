/// Edge-level errors. Geometry and scheduling never fail; they degrade to "nothing drawn".
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    ValidationError(String),
    ConfigurationError(String),
    RenderingError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
            AppError::ConfigurationError(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::RenderingError(msg) => write!(f, "Rendering Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ConfigurationError(err.to_string())
    }
}

pub type ChartResult<T> = Result<T, AppError>;
