use crate::input_files;
use crate::signing_args::SigningArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_signed_operation::generate_artifact;
use graphql_signed_operation::validate;
use graphql_signed_operation::DocumentSetBuilder;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[command(flatten)]
    signing: SigningArgs,

    #[arg(
        help="Path of the JSON signature map to write. Must end in `.json`.",
        long,
        short='o',
    )]
    output: PathBuf,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             the operations and fragments to be signed.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

impl GenerateCmd {
    fn execute(&self) -> anyhow::Result<String> {
        let config = self.signing.load_config()?;
        validate(&config, &self.output)?;

        let discovered = input_files::discover_graphql_files(
            &self.file_or_dir_paths,
            &self.graphql_file_exts,
        )?;
        let documents = DocumentSetBuilder::new()
            .load_files(&discovered.file_paths)?
            .build();

        let artifact = generate_artifact(&documents, &config)?;
        if let Some(parent) = self.output.parent()
            && !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {parent:?}"))?;
        }
        std::fs::write(&self.output, format!("{artifact}\n"))
            .with_context(|| format!("Failed to write {:?}", self.output))?;

        let num_operations = documents.iter()
            .map(|doc| doc.operations().count())
            .sum::<usize>();
        log::info!("Wrote {num_operations} signatures to {:?}.", self.output);
        Ok(format!(
            concat!(
                "Signature map written to {:?}:\n",
                "  * Loaded {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Signed {} operations.",
            ),
            self.output,
            discovered.file_paths.len(),
            discovered.num_skipped,
            num_operations,
        ))
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        self.execute().into()
    }
}
