//! Solar command: dump the solar geometry of a site for inspection.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tethys_io::write_solar_table;
use tethys_solar::{Location, SolarGeometry, SunMarker, sunrise_sunset_markers};

use crate::cli::SolarArgs;

/// Compute and write the solar geometry table.
pub fn run(args: SolarArgs) -> Result<()> {
    let _cmd = info_span!("solar").entered();
    let location = Location::new(args.latitude, args.longitude, args.utc_offset)
        .context("invalid site")?
        .with_elevation(args.elevation);

    let geometry = SolarGeometry::compute(&location);
    let markers = sunrise_sunset_markers(&location);
    let sunrises = markers.iter().filter(|&&m| m == SunMarker::Sunrise).count();
    info!(
        latitude = location.latitude(),
        longitude = location.longitude(),
        sunrises,
        "solar geometry computed"
    );

    write_solar_table(&args.output, &geometry, &markers)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!(path = %args.output.display(), "solar table written");
    Ok(())
}
