use crate::demo::{
    run_assessment, run_demo, run_document_progress, run_requirements, AssessArgs, DocumentsArgs,
    RequirementsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use visa_ready::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "visa-ready",
    about = "Score visa applications and track required documents",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a questionnaire profile read from a JSON file
    Assess(AssessArgs),
    /// Report document progress for a visa type and destination
    Documents(DocumentsArgs),
    /// Show the required documents for a visa type and destination
    Requirements(RequirementsArgs),
    /// Walk through a sample assessment and document check
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assessment(args),
        Command::Documents(args) => run_document_progress(args),
        Command::Requirements(args) => run_requirements(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["visa-ready"]).expect("parses without args");
        assert!(cli.command.is_none());
    }

    #[test]
    fn documents_command_takes_visa_selection() {
        let cli = Cli::try_parse_from([
            "visa-ready",
            "documents",
            "--visa-type",
            "Student",
            "--destination",
            "Canada",
        ])
        .expect("documents parses");

        match cli.command {
            Some(Command::Documents(args)) => {
                assert_eq!(args.visa_type, "Student");
                assert_eq!(args.destination, "Canada");
                assert!(args.uploaded.is_none());
            }
            other => panic!("expected documents command, got {other:?}"),
        }
    }
}
