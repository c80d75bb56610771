use crate::{Logger, StdLogger};

/// Configuration for a selector pass
///
/// The simplest usage is `grass_extend::Options::default()`; however, a builder
/// pattern is also exposed to offer more control.
#[derive(Debug)]
pub struct Options<'a> {
    pub(crate) logger: &'a dyn Logger,
    pub(crate) quiet: bool,
    pub(crate) trace_conversions: bool,
    pub(crate) unicode_error_messages: bool,
}

impl Default for Options<'_> {
    #[inline]
    fn default() -> Self {
        Self {
            logger: &StdLogger,
            quiet: false,
            trace_conversions: false,
            unicode_error_messages: true,
        }
    }
}

impl<'a> Options<'a> {
    /// This option allows you to define how log events should be handled
    ///
    /// Be default, [`StdLogger`] is used, which writes all events to standard error.
    #[must_use]
    #[inline]
    pub fn logger(mut self, logger: &'a dyn Logger) -> Self {
        self.logger = logger;
        self
    }

    /// This flag stops all logs from reaching the [`crate::Logger`], including
    /// reports of internal errors. The errors themselves are still returned.
    ///
    /// By default, this value is `false`.
    #[must_use]
    #[inline]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// When enabled, every conversion between a selector chain and a node tree
    /// is logged at the debug level.
    ///
    /// By default, this value is `false`.
    #[must_use]
    #[inline]
    pub const fn trace_conversions(mut self, trace_conversions: bool) -> Self {
        self.trace_conversions = trace_conversions;
        self
    }

    /// This flag tells grass_extend whether or not to emit unicode characters
    /// in error messages.
    ///
    /// By default, this value is `true`.
    #[must_use]
    #[inline]
    pub const fn unicode_error_messages(mut self, unicode_error_messages: bool) -> Self {
        self.unicode_error_messages = unicode_error_messages;
        self
    }
}
