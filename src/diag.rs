use core::fmt;

/// A fire-and-forget reporting capability injected into the list handler.
///
/// The handler reports three severities: informational (successful removal),
/// warning (operation attempted on an empty list), and error (removal target
/// not found). Reports never influence control flow and have no return value;
/// where a message names a node, its address is rendered as an unsigned
/// integer.
pub trait DiagnosticSink {
    /// Report an informational event.
    fn info(&self, args: fmt::Arguments<'_>);

    /// Report a suspicious but non-failing condition.
    fn warn(&self, args: fmt::Arguments<'_>);

    /// Report a failed operation.
    fn error(&self, args: fmt::Arguments<'_>);
}

/// A sink that discards every report. This is the default for handlers
/// constructed with [`Handler::new`](crate::list::Handler::new).
#[derive(Debug, Default, Clone, Copy)]
pub struct NopSink;

impl DiagnosticSink for NopSink {
    fn info(&self, _args: fmt::Arguments<'_>) {}

    fn warn(&self, _args: fmt::Arguments<'_>) {}

    fn error(&self, _args: fmt::Arguments<'_>) {}
}

/// A sink that forwards every report to the [`log`] facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn info(&self, args: fmt::Arguments<'_>) {
        log::info!("{args}");
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        log::warn!("{args}");
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        log::error!("{args}");
    }
}
