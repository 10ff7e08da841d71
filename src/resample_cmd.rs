//! Resample command: percentile grid -> percentile grid.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ecc_percentile::PercentileResampler;

use crate::cli::ResampleArgs;
use crate::{config, convert, io};

/// Run the percentile resampling.
pub fn run(args: ResampleArgs) -> Result<()> {
    let _cmd = info_span!("resample").entered();
    let config = config::load(args.config.as_deref())?;

    info!(path = %args.input.display(), "reading percentile grid");
    let grid = io::read_grid(&args.input)?;
    info!(
        variable = grid.variable(),
        n_points = grid.n_points(),
        n_percentiles = grid.axis().len(),
        "percentile grid loaded"
    );

    let sampling = convert::build_sampling(
        &config.percentiles,
        args.selection.random,
        args.selection.seed,
    )?;
    let request = convert::build_request(
        &config.percentiles,
        args.selection.count,
        args.selection.percentiles.as_deref(),
    );

    let mut resampler = PercentileResampler::new().with_sampling(sampling);
    let cli_bounds = args.bounds.lower.zip(args.bounds.upper);
    if let Some(bounds) = convert::build_bounds(grid.variable(), cli_bounds, &config)? {
        info!(lower = bounds.lower(), upper = bounds.upper(), "padding with bounds");
        resampler = resampler.with_bounds(bounds);
    }

    let mut out = resampler
        .process(&grid, &request)
        .with_context(|| format!("failed to resample {}", grid.variable()))?;
    if args.as_realizations {
        out = out.rebadge_as_realizations()?;
    }

    info!(path = %args.output.display(), n_out = out.axis().len(), "writing percentile grid");
    io::write_grid(&args.output, &out)?;
    Ok(())
}
