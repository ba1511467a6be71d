use crate::signing_args::SigningArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_signed_operation::file_reader;
use graphql_signed_operation::OperationVerifier;
use graphql_signed_operation::SignatureMap;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct VerifyCmd {
    #[command(flatten)]
    signing: SigningArgs,

    #[arg(
        help="Signature map previously written by `generate`.",
        long,
    )]
    signatures: PathBuf,

    #[arg(
        help="Name under which the operation was signed.",
        long,
    )]
    operation_name: String,

    #[arg(
        help="Hash presented alongside the operation (e.g. by a client). When \
             given it must match the operation text as well.",
        long,
    )]
    hash: Option<String>,

    #[arg(
        help="File containing the operation text (and its fragments) to check.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,
}

impl VerifyCmd {
    fn execute(&self) -> anyhow::Result<String> {
        let config = self.signing.load_config()?;

        let map_content = file_reader::read_content(&self.signatures)?;
        let signatures = SignatureMap::from_json_str(map_content.as_str())
            .with_context(|| format!("Invalid signature map {:?}", self.signatures))?;
        log::debug!(
            "Loaded {} signatures from {:?}.",
            signatures.len(),
            self.signatures,
        );
        let verifier = OperationVerifier::new(signatures, &config)?;

        let query_text = file_reader::read_content(&self.query_file)?;
        verifier.verify(self.operation_name.as_str(), query_text.as_str())
            .with_context(|| format!("Operation `{}` rejected", self.operation_name))?;
        if let Some(hash) = &self.hash {
            verifier.verify_presented_hash(query_text.as_str(), hash.as_str())
                .with_context(|| {
                    format!("Presented hash rejected for `{}`", self.operation_name)
                })?;
        }

        Ok(format!(
            "Operation `{}` in {:?} matches its signature.",
            self.operation_name,
            self.query_file,
        ))
    }
}

#[inherent::inherent]
impl RunnableCommand for VerifyCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.execute().into()
    }
}
