//! Percentiles command: threshold-exceedance grid -> percentile grid.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use ecc_percentile::ProbabilityToPercentileConverter;

use crate::cli::PercentilesArgs;
use crate::{config, convert, io};

/// Run the probability-to-percentile conversion.
pub fn run(args: PercentilesArgs) -> Result<()> {
    let _cmd = info_span!("percentiles").entered();
    let config = config::load(args.config.as_deref())?;

    info!(path = %args.input.display(), "reading threshold grid");
    let grid = io::read_grid(&args.input)?;
    info!(
        variable = grid.variable(),
        n_points = grid.n_points(),
        n_thresholds = grid.axis().len(),
        "threshold grid loaded"
    );

    let cli_bounds = args.bounds.lower.zip(args.bounds.upper);
    let bounds = convert::build_bounds(grid.variable(), cli_bounds, &config)?.ok_or_else(|| {
        anyhow!(
            "no bounds for variable {:?}: pass --lower/--upper or add [bounds.{}] to the config",
            grid.variable(),
            grid.variable()
        )
    })?;
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

    let mut out = ProbabilityToPercentileConverter::new()
        .with_sampling(sampling)
        .process(&grid, &bounds, &request)
        .with_context(|| format!("failed to convert {} to percentiles", grid.variable()))?;
    if args.as_realizations {
        out = out.rebadge_as_realizations()?;
    }

    info!(path = %args.output.display(), n_out = out.axis().len(), "writing percentile grid");
    io::write_grid(&args.output, &out)?;
    Ok(())
}
