//! `--list-sites` and `--list-wlans`: discovery helpers for picking the
//! right `--site` and `--wlan` values.

use macfilter_core::resolve_site;

use super::{Context, connect, spinner};
use crate::error::CliError;
use crate::output;

pub async fn list_sites(ctx: &Context<'_>) -> Result<(), CliError> {
    ctx.settings.require(false, false)?;

    let session = connect(ctx.settings).await?;
    let progress = spinner("Fetching sites...", ctx.cli.quiet);
    let fetched = session.list_sites().await;
    session.close().await;
    progress.finish_and_clear();

    let rendered = output::render_sites(ctx.cli.output_format(), &fetched?)?;
    output::print_output(&rendered, ctx.cli.quiet);
    Ok(())
}

pub async fn list_wlans(ctx: &Context<'_>) -> Result<(), CliError> {
    ctx.settings.require(true, false)?;
    let query = ctx.settings.site.as_deref().unwrap_or_default();

    let session = connect(ctx.settings).await?;
    let progress = spinner("Fetching WLANs...", ctx.cli.quiet);
    let fetched = async {
        let sites = session.list_sites().await?;
        let site = resolve_site(&sites, query)?;
        session.list_wlans(&site.code).await
    }
    .await;
    session.close().await;
    progress.finish_and_clear();

    let rendered = output::render_wlans(ctx.cli.output_format(), &fetched?)?;
    output::print_output(&rendered, ctx.cli.quiet);
    Ok(())
}
