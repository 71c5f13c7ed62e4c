//! Tracing subscriber setup for the binary.

use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds the formatting subscriber writing to `writer`.
///
/// An explicit filter (from `--log`) wins over `RUST_LOG`, which wins over
/// `fallback` from the config file.
pub fn subscriber<W>(
    explicit: bool,
    fallback: &str,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = if explicit {
        EnvFilter::new(fallback)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .finish()
}

/// Installs the global subscriber on stderr so logs never interleave with
/// the board on stdout.
pub fn init_tracing(explicit: bool, fallback: &str) {
    subscriber(explicit, fallback, io::stderr).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn test_resolved_config_reaches_installed_subscriber() {
        let capture = Capture::default();
        let config = Config::default().with_seed(5u64);

        tracing::subscriber::with_default(subscriber(true, "info", capture.clone()), || {
            config.log_resolved();
        });

        let out = capture.contents();
        assert!(out.contains("Configuration resolved"), "{out}");
    }

    #[test]
    fn test_explicit_filter_silences_lower_levels() {
        let capture = Capture::default();

        tracing::subscriber::with_default(subscriber(true, "warn", capture.clone()), || {
            Config::default().log_resolved();
        });

        assert!(capture.contents().is_empty());
    }
}
