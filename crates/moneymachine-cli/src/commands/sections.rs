use std::io::Write;

use moneymachine_config::SectionId;

use crate::cli::{OutputFormat, SectionArgs};
use crate::context::{AppContext, CliResult};
use crate::output::{render_section, render_sections};

pub(crate) fn handle_section(
    ctx: &AppContext,
    args: SectionArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    if let Some(raw) = args.id {
        let id: SectionId = raw.parse()?;
        ctx.sections.select(id);
        ctx.ensure_section_saved(id)?;
    }
    render_section(ctx.sections.active(), format, out)
}

pub(crate) fn handle_sections(
    ctx: &AppContext,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    render_sections(ctx.sections.active(), format, out)
}
