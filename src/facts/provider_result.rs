use std::sync::Arc;

#[derive(Debug, Clone)]
pub enum ProviderResult<T> {
    /// The operation succeeded and data was found.
    Found(T),

    /// The data does not exist or the source declined to provide it.
    Unavailable(Arc<str>),

    /// An error occurred while fetching the data.
    Error(Arc<ohno::AppError>),
}

impl<T> ProviderResult<T> {
    /// Returns a reference to the contained data if `Found`, otherwise `None`.
    #[must_use]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Found(data) => Some(data),
            _ => None,
        }
    }

    /// Transforms the found value, leaving the other variants untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ProviderResult<U> {
        match self {
            Self::Found(data) => ProviderResult::Found(f(data)),
            Self::Unavailable(reason) => ProviderResult::Unavailable(reason),
            Self::Error(e) => ProviderResult::Error(e),
        }
    }

    pub fn unavailable(reason: impl AsRef<str>) -> Self {
        Self::Unavailable(Arc::from(reason.as_ref()))
    }

    pub fn error(err: ohno::AppError) -> Self {
        Self::Error(Arc::new(err))
    }
}
