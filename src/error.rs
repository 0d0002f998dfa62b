#[derive(thiserror::Error, Debug)]
pub(crate) enum PageError {
    #[error("no container with id `{0}` on the page")]
    MissingContainer(String),
    #[error("failed to load settings")]
    Config(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::PageError;

    #[test]
    fn config_cause_is_reported_once() {
        let err = PageError::from(config::ConfigError::Message("invalid type".into()));

        assert_eq!(err.to_string(), "failed to load settings");
        let source = err.source().map(|cause| cause.to_string());
        assert_eq!(source.as_deref(), Some("invalid type"));
    }
}
