//! Threshold command: realization grid -> threshold-exceedance grid.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ecc_threshold::exceedance_probabilities;

use crate::cli::ThresholdArgs;
use crate::{convert, io};

/// Run the thresholding of ensemble members.
pub fn run(args: ThresholdArgs) -> Result<()> {
    let _cmd = info_span!("threshold").entered();
    let thresholds = convert::build_thresholds(&args.thresholds, args.fuzzy_factor, args.below)?;

    info!(path = %args.input.display(), "reading member grid");
    let members = io::read_grid(&args.input)?;
    info!(
        variable = members.variable(),
        n_points = members.n_points(),
        n_members = members.axis().len(),
        "member grid loaded"
    );

    let out = exceedance_probabilities(&members, &thresholds)
        .with_context(|| format!("failed to threshold {}", members.variable()))?;

    info!(path = %args.output.display(), "writing threshold grid");
    io::write_grid(&args.output, &out)?;
    Ok(())
}
