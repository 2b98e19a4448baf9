//! Configuration loading tests

#[cfg(test)]
mod tests {
    use crpt_api::config::Validate;
    use crpt_api::{ClientConfig, CrptApi, CrptError, TimeUnit};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_client_from_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "time_unit: SECONDS").unwrap();
        writeln!(file, "request_limit: 3").unwrap();
        writeln!(file, "request_timeout: 5").unwrap();

        let config = ClientConfig::from_file(file.path()).await.unwrap();
        assert!(config.validate().is_ok());

        let api = CrptApi::from_config(&config).unwrap();
        assert_eq!(api.dispatcher().pool_size(), 3);
        assert_eq!(api.dispatcher().gate().window().unit(), TimeUnit::Seconds);
    }

    #[test]
    fn test_invalid_yaml_is_a_yaml_error() {
        let result = ClientConfig::from_yaml_str("time_unit: [not, a, unit]");
        let err = result.unwrap_err();
        assert!(matches!(err, CrptError::Yaml(_)));
        assert!(err.is_construction_error());
        assert!(err.to_string().starts_with("YAML error"));
    }
}
