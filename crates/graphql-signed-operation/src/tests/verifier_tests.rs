use crate::generate;
use crate::tests::utils::documents;
use crate::ConfigError;
use crate::OperationVerifier;
use crate::SignatureMap;
use crate::SigningConfig;
use crate::VerificationError;

fn verifier_for(sources: &[&str], config: &SigningConfig) -> OperationVerifier {
    let signatures = generate(&documents(sources), config).unwrap();
    OperationVerifier::new(signatures, config).unwrap()
}

#[test]
fn accepts_client_text_with_different_layout_and_fragment_order() {
    let config = SigningConfig::new("server-secret");
    let verifier = verifier_for(
        &[
            "fragment user on User { name id }",
            "query user { user { ...user } }",
        ],
        &config,
    );

    let received = r#"
        query user {
          user {
            ...user
          }
        }

        fragment user on User {
          id
          name
        }
    "#;

    assert_eq!(verifier.verify("user", received), Ok(()));
}

#[test]
fn accepts_the_exact_text_that_was_signed() {
    let sources = [
        r#"query ctl { field(x: "\u001f", y: "😀") }"#,
        "query big { field(x: 1e30) }",
        "query block { field(x: \"\"\"\n    two\n      lines\n    \"\"\") }",
    ];
    let verifier = verifier_for(&sources, &SigningConfig::new("server-secret"));

    for (name, text) in ["ctl", "big", "block"].into_iter().zip(sources) {
        assert_eq!(verifier.verify(name, text), Ok(()), "{name}");
    }
}

#[test]
fn control_character_digest_does_not_accept_a_different_string() {
    let verifier = verifier_for(
        &[r#"query ctl { field(x: "\u001f") }"#],
        &SigningConfig::new("server-secret"),
    );

    assert_eq!(
        verifier.verify("ctl", r#"query ctl { field(x: "1") }"#),
        Err(VerificationError::Mismatch),
    );
}

#[test]
fn rejects_tampered_operation() {
    let verifier = verifier_for(
        &["query user { user { id } }"],
        &SigningConfig::new("server-secret"),
    );

    assert_eq!(
        verifier.verify("user", "query user { user { id password } }"),
        Err(VerificationError::Mismatch),
    );
}

#[test]
fn rejects_unknown_operation_name() {
    let verifier = verifier_for(
        &["query user { user { id } }"],
        &SigningConfig::new("server-secret"),
    );

    assert_eq!(
        verifier.verify("admin", "query admin { users { id } }"),
        Err(VerificationError::UnknownOperation("admin".to_string())),
    );
}

#[test]
fn rejects_unparsable_operation() {
    let verifier = verifier_for(
        &["query user { user { id } }"],
        &SigningConfig::new("server-secret"),
    );

    assert!(matches!(
        verifier.verify("user", "query user { user { id }"),
        Err(VerificationError::Parse(_)),
    ));
}

#[test]
fn digests_made_with_another_secret_are_rejected() {
    let build_config = SigningConfig::new("build-secret");
    let signatures = generate(&documents(&["query q { a }"]), &build_config).unwrap();
    let verifier =
        OperationVerifier::new(signatures, &SigningConfig::new("other-secret")).unwrap();

    assert_eq!(verifier.verify("q", "query q { a }"), Err(VerificationError::Mismatch));
}

#[test]
fn presented_hash_is_checked_without_the_map() {
    let config = SigningConfig::new("server-secret").with_algorithm("sha512");
    let signatures = generate(&documents(&["query q { a b }"]), &config).unwrap();
    let hash = signatures.get("q").unwrap().to_string();
    let verifier = OperationVerifier::new(SignatureMap::new(), &config).unwrap();

    assert_eq!(verifier.verify_presented_hash("query q { b a }", &hash), Ok(()));
    assert_eq!(
        verifier.verify_presented_hash("query q { a }", &hash),
        Err(VerificationError::Mismatch),
    );
    assert_eq!(
        verifier.verify_presented_hash("query q { a b }", "not-hex"),
        Err(VerificationError::MalformedHash),
    );
}

#[test]
fn verifier_requires_a_valid_config() {
    assert!(matches!(
        OperationVerifier::new(SignatureMap::new(), &SigningConfig::new("")),
        Err(ConfigError::MissingSecret),
    ));
}
