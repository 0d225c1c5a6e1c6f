//! `graphdocs-ctl procedures`: the stored procedure reference.

use graphdocs_tooling::procedures::{JsonProcedureCatalog, ProcedureReferenceGenerator};
use graphdocs_tooling::DocsResult;

use super::emit;
use crate::cli_config::CliConfig;
use crate::ProcedureArgs;

pub(crate) fn handle_procedures_command(
    args: ProcedureArgs,
    cli_config: &CliConfig,
) -> DocsResult<()> {
    let catalog = JsonProcedureCatalog::new(&args.community, &args.enterprise);
    let doc = ProcedureReferenceGenerator::new(catalog).document(&args.id, &args.title)?;
    emit(&doc, args.output.as_deref(), cli_config, "Procedure reference")
}
