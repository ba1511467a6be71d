use crate::ConfigError;
use crate::SigningAlgorithm;
use crate::SigningConfig;
use crate::UnsupportedAlgorithm;
use std::io::Write;

#[test]
fn deserializes_secret_and_algorithm() {
    let config = SigningConfig::from_json_str(
        r#"{ "secret": "abc", "algorithm": "md5" }"#,
    ).unwrap();

    assert_eq!(config.secret, "abc");
    assert_eq!(config.signing_algorithm().unwrap(), SigningAlgorithm::Md5);
}

#[test]
fn algorithm_defaults_to_sha256() {
    let config = SigningConfig::from_json_str(r#"{ "secret": "abc" }"#).unwrap();

    assert_eq!(config.algorithm, None);
    assert_eq!(config.signing_algorithm().unwrap(), SigningAlgorithm::Sha256);
}

#[test]
fn missing_secret_is_reported_by_check_not_by_deserialization() {
    let config = SigningConfig::from_json_str("{}").unwrap();

    assert!(matches!(config.check(), Err(ConfigError::MissingSecret)));
}

#[test]
fn empty_secret_fails_check() {
    assert!(matches!(
        SigningConfig::new("").check(),
        Err(ConfigError::MissingSecret),
    ));
}

#[test]
fn unsupported_algorithm_fails_check() {
    let config = SigningConfig::new("abc").with_algorithm("whirlpool");

    match config.check() {
        Err(ConfigError::UnsupportedAlgorithm(UnsupportedAlgorithm(name))) => {
            assert_eq!(name, "whirlpool");
        },
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn algorithm_names_are_case_insensitive() {
    assert_eq!("SHA512".parse::<SigningAlgorithm>(), Ok(SigningAlgorithm::Sha512));
    assert_eq!(" sha1 ".parse::<SigningAlgorithm>(), Ok(SigningAlgorithm::Sha1));
    assert_eq!("sha-256".parse::<SigningAlgorithm>(), Err(UnsupportedAlgorithm("sha-256".to_string())));
}

#[test]
fn algorithm_display_round_trips() {
    for algorithm in SigningAlgorithm::ALL {
        assert_eq!(algorithm.to_string().parse::<SigningAlgorithm>(), Ok(algorithm));
    }
}

#[test]
fn malformed_json_is_a_deserialize_error() {
    assert!(matches!(
        SigningConfig::from_json_str("{ secret: }"),
        Err(ConfigError::Deserialize(_)),
    ));
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "secret": "from-file", "algorithm": "sha384" }}"#).unwrap();

    let config = SigningConfig::from_file(file.path()).unwrap();

    assert_eq!(config.secret, "from-file");
    assert_eq!(config.signing_algorithm().unwrap(), SigningAlgorithm::Sha384);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    assert!(matches!(
        SigningConfig::from_file(dir.path().join("nope.json")),
        Err(ConfigError::Read(_)),
    ));
}

#[test]
fn debug_output_and_errors_never_contain_the_secret() {
    let config = SigningConfig::new("hunter2-hunter2").with_algorithm("nope");

    assert!(!format!("{config:?}").contains("hunter2-hunter2"));
    let err = config.check().unwrap_err();
    assert!(!err.to_string().contains("hunter2-hunter2"));
}
