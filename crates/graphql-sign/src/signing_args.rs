use anyhow::Context;
use graphql_signed_operation::SigningConfig;
use std::path::PathBuf;

/// Where the signing secret and algorithm come from.
///
/// Values given on the command line (or via `SIGNING_SECRET`) take
/// precedence over those read from `--config`.
#[derive(clap::Args)]
pub(crate) struct SigningArgs {
    #[arg(
        help="JSON file of the form `{\"secret\": \"...\", \"algorithm\": \"sha256\"}`.",
        long,
    )]
    pub(crate) config: Option<PathBuf>,

    #[arg(
        env="SIGNING_SECRET",
        help="Secret key for the HMAC.",
        hide_env_values=true,
        long,
    )]
    pub(crate) secret: Option<String>,

    #[arg(
        help="Hash function for the HMAC: md5, sha1, sha224, sha256, sha384 \
             or sha512. Defaults to sha256.",
        long,
    )]
    pub(crate) algorithm: Option<String>,
}

impl SigningArgs {
    pub(crate) fn load_config(&self) -> anyhow::Result<SigningConfig> {
        let mut config = match &self.config {
            Some(path) => {
                log::debug!("Reading signing configuration from {path:?}.");
                SigningConfig::from_file(path)
                    .with_context(|| format!("Invalid signing configuration {path:?}"))?
            },
            None => SigningConfig::default(),
        };

        if let Some(secret) = &self.secret {
            config.secret = secret.clone();
        }
        if let Some(algorithm) = &self.algorithm {
            config.algorithm = Some(algorithm.clone());
        }
        Ok(config)
    }
}

impl std::fmt::Debug for SigningArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningArgs")
            .field("config", &self.config)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
