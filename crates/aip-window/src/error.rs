use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("window max_size must be at least {min}, got {actual}")]
    ConfigInvalid { min: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_config_invalid() {
        let err = WindowError::ConfigInvalid { min: 3, actual: 1 };
        assert_eq!(err.to_string(), "window max_size must be at least 3, got 1");
    }
}
