use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &[
    "tethys",
    "tethys_calendar",
    "tethys_climatology",
    "tethys_io",
    "tethys_morph",
    "tethys_solar",
    "tethys_stats",
];

/// Log level for a `-v` count: none warn, `-v` info, `-vv` debug, more trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives enabling `level` for every workspace crate.
fn default_directives(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing on stderr from the CLI verbosity.
///
/// `RUST_LOG` overrides the flag when set.
pub fn init(verbosity: u8) {
    let directives = default_directives(level_for(verbosity));
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(9), "trace");
    }

    #[test]
    fn directives_cover_every_crate() {
        let d = default_directives("info");
        assert!(d.starts_with("tethys=info,"));
        assert!(d.contains("tethys_morph=info"));
        assert_eq!(d.split(',').count(), CRATE_TARGETS.len());
    }
}
