#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("input method error: {0}")]
    InputMethod(String),

    #[error("window chrome error: {0}")]
    Chrome(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_error_display() {
        let err = PlatformError::InputMethod("no focused view".into());
        assert_eq!(err.to_string(), "input method error: no focused view");

        let err = PlatformError::Chrome("window gone".into());
        assert_eq!(err.to_string(), "window chrome error: window gone");

        let err = PlatformError::NotSupported("programmatic keyboard".into());
        assert_eq!(err.to_string(), "not supported: programmatic keyboard");
    }
}
