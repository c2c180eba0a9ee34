//! Error reporting capability injected into webhooks.

/// Sink for delivery failure diagnostics.
///
/// Each failed send produces exactly one call to `report_error`.
pub trait ErrorReporter: Send + Sync {
    fn report_error(&self, message: &str);
}

/// Reports errors through `tracing` at ERROR level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report_error(&self, message: &str) {
        tracing::error!(target: "lokhook::notify", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn tracing_reporter_is_usable_as_trait_object() {
        let reporter: Arc<dyn ErrorReporter> = Arc::new(TracingReporter);
        reporter.report_error("Failed to send Discord webhook: 500 oops");
    }
}
