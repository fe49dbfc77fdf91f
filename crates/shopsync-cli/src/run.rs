//! Wires the catalog and index clients into the selected sync loop.

use std::time::Instant;

use anyhow::Context;
use shopsync_algolia::IndexClient;
use shopsync_core::AppConfig;
use shopsync_shopify::CatalogClient;
use shopsync_sync::{run_parallel, run_sequential, CatalogPageSource};

use crate::Cli;

/// Concurrency width for this invocation, or `None` for the sequential loop.
pub(crate) fn parallel_width(cli: &Cli, config: &AppConfig) -> Option<usize> {
    cli.parallel
        .then_some(cli.width.unwrap_or(config.parallel_width))
}

/// Runs one full sync and logs its totals and wall time.
///
/// # Errors
///
/// Returns an error if a client cannot be built or the run aborts on a fetch
/// or sync failure.
pub(crate) async fn run_sync(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let catalog = CatalogClient::new(
        &config.shopify_store,
        &config.shopify_api_version,
        &config.shopify_access_token,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build catalog client")?;

    let index = IndexClient::new(
        &config.algolia_app_id,
        &config.algolia_admin_api_key,
        &cli.index_name,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build index client")?;

    let source = CatalogPageSource::new(catalog, &cli.country, &cli.locale, cli.batch_size);
    let width = parallel_width(cli, config);

    tracing::info!(
        country = %cli.country,
        locale = %cli.locale,
        index = %cli.index_name,
        batch_size = cli.batch_size.get(),
        parallel_width = width,
        "starting sync"
    );

    let started = Instant::now();
    let result = match width {
        Some(width) => run_parallel(&source, &index, width).await,
        None => run_sequential(&source, &index).await,
    };
    let elapsed_secs = started.elapsed().as_secs_f64();

    match result {
        Ok(summary) => {
            tracing::info!(
                records = summary.records_synced,
                fetches = summary.fetches,
                rounds = summary.rounds,
                elapsed_secs,
                "sync complete"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, elapsed_secs, "sync aborted");
            Err(e).context("sync aborted")
        }
    }
}
