use anyhow::anyhow;

/// Install a stderr subscriber for drivers that embed the translation.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("Logging: Failed to install subscriber: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_an_error() {
        let _ = init_tracing(true);
        assert!(init_tracing(false).is_err());
    }
}
