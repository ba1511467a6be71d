use crate::signing_args::SigningArgs;
use graphql_signed_operation::SigningAlgorithm;

fn args(
    config: Option<std::path::PathBuf>,
    secret: Option<&str>,
    algorithm: Option<&str>,
) -> SigningArgs {
    SigningArgs {
        config,
        secret: secret.map(str::to_string),
        algorithm: algorithm.map(str::to_string),
    }
}

#[test]
fn command_line_values_override_the_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(
        &mut file,
        br#"{ "secret": "from-file", "algorithm": "md5" }"#,
    ).unwrap();

    let config = args(Some(file.path().to_path_buf()), Some("from-flag"), None)
        .load_config()
        .unwrap();

    assert_eq!(config.secret, "from-flag");
    assert_eq!(config.signing_algorithm().unwrap(), SigningAlgorithm::Md5);
}

#[test]
fn without_a_config_file_only_flags_are_used() {
    let config = args(None, Some("abc"), Some("SHA384")).load_config().unwrap();

    assert_eq!(config.secret, "abc");
    assert_eq!(config.signing_algorithm().unwrap(), SigningAlgorithm::Sha384);
}

#[test]
fn missing_secret_is_left_for_validation() {
    let config = args(None, None, None).load_config().unwrap();

    assert!(config.check().is_err());
}

#[test]
fn debug_output_redacts_the_secret() {
    let debug = format!("{:?}", args(None, Some("top-secret-value"), None));

    assert!(!debug.contains("top-secret-value"));
}
