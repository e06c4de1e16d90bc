/// A sink for removal warnings.
///
/// [`LoggingReactor`](crate::LoggingReactor) reports removed attributes
/// through this capability. Availability is expressed at construction time:
/// the reactor holds an `Option` of a sink and stays silent when given
/// `None`, so there is no runtime probing of the host object.
pub trait LogSink {
    /// Emits one warning-level message.
    fn warn(&self, message: &str);
}

/// The default sink, forwarding warnings to [`tracing`].
///
/// Thread safety of the actual log transport is the subscriber's concern;
/// this type only hands the message off.
///
/// # Examples
///
/// ```
/// use assign_guard::{LogSink, TracingSink};
///
/// let sink = TracingSink;
/// sink.warn("something worth noticing");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
