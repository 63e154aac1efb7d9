use tracing_subscriber::EnvFilter;

/// Crate targets that should receive log output.
///
/// The library and the `leave-planner` binary both log under the
/// `leave_planner` target prefix, so one entry covers every event this
/// package emits. Dependencies such as axum and tokio stay silent unless
/// `RUST_LOG` enables them.
const CRATE_TARGETS: &[&str] = &["leave_planner"];

/// Initialize tracing based on CLI verbosity level.
///
/// Mapping:
/// - 0 (none) -> warn
/// - 1 (-v)   -> info
/// - 2 (-vv)  -> debug
/// - 3+ (-vvv)-> trace
///
/// `RUST_LOG` env var overrides the CLI flag if set. Logs go to stderr so
/// the rendered page on stdout stays clean.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The filter directive used when `RUST_LOG` is unset.
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_per_verbosity() {
        assert_eq!(default_filter(0), "leave_planner=warn");
        assert_eq!(default_filter(1), "leave_planner=info");
        assert_eq!(default_filter(2), "leave_planner=debug");
        assert_eq!(default_filter(7), "leave_planner=trace");
    }

    #[test]
    fn test_binary_module_path_is_covered() {
        // Events from the binary's own modules, e.g. `render_cmd`.
        let target = module_path!();
        assert!(
            CRATE_TARGETS
                .iter()
                .any(|crate_target| target.starts_with(crate_target))
        );
    }
}
