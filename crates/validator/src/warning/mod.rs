//! Development warnings
//!
//! A [`WarningChannel`] validates its format string, interpolates `%s`
//! placeholders and hands the resulting `Warning: ...` line to a
//! [`WarningSink`]. Nothing here ever fails the caller's operation except a
//! malformed format, which is a programming error reported as
//! [`WarningError`].
//!
//! ```rust
//! use std::sync::Arc;
//! use prop_types::warning::{RecordingSink, WarningChannel};
//!
//! let sink = Arc::new(RecordingSink::new());
//! let channel = WarningChannel::strict().with_sink(sink.clone());
//!
//! channel.warn(false, "Expected %s to be mounted", &[&"Dialog"]).unwrap();
//! assert_eq!(sink.messages(), ["Warning: Expected Dialog to be mounted"]);
//! ```

mod sink;

use std::backtrace::Backtrace;
use std::borrow::Cow;
use std::fmt::{self, Display};
use std::sync::{Arc, LazyLock};

pub use sink::{RecordingSink, StderrSink, TracingSink, WarningSink};

/// Prefix of messages produced by an older composite-type path; the legacy
/// channel drops them.
pub const LEGACY_COMPOSITE_PREFIX: &str = "Failed Composite propType: ";

/// Shortest accepted format, in UTF-16 code units.
const MIN_FORMAT_LEN: usize = 10;

/// Invalid use of the warning channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WarningError {
    #[error("`warning(condition, format, ...args)` requires a warning message argument")]
    MissingFormat,

    #[error(
        "The warning format should be able to uniquely identify this warning. Please, use a \
         more descriptive format than: {format}"
    )]
    NonDescriptiveFormat { format: String },
}

/// Emits `Warning: ...` lines to a sink.
#[derive(Clone)]
pub struct WarningChannel {
    sink: Arc<dyn WarningSink>,
    ignored_prefix: Option<Cow<'static, str>>,
}

impl WarningChannel {
    /// A channel that forwards every warning to `sink`.
    pub fn new(sink: impl WarningSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
            ignored_prefix: None,
        }
    }

    /// Forwards every warning to `tracing`.
    #[must_use]
    pub fn strict() -> Self {
        Self::new(TracingSink)
    }

    /// Like [`strict`](Self::strict), but silently drops formats starting
    /// with [`LEGACY_COMPOSITE_PREFIX`].
    #[must_use]
    pub fn legacy() -> Self {
        Self::strict().ignoring_prefix(LEGACY_COMPOSITE_PREFIX)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn ignoring_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.ignored_prefix = Some(prefix.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn without_ignored_prefix(mut self) -> Self {
        self.ignored_prefix = None;
        self
    }

    pub fn ignored_prefix(&self) -> Option<&str> {
        self.ignored_prefix.as_deref()
    }

    /// Emits a warning when `condition` is false.
    ///
    /// The format is validated before the condition is looked at, so a bad
    /// format is reported even when nothing would be emitted. Each `%s` is
    /// replaced by the next argument; placeholders without an argument
    /// render as `undefined`.
    ///
    /// # Errors
    ///
    /// [`WarningError::MissingFormat`] when `format` is `None`, and
    /// [`WarningError::NonDescriptiveFormat`] when it is shorter than ten
    /// characters or consists only of `s` and non-word characters.
    pub fn warn<'f>(
        &self,
        condition: bool,
        format: impl Into<Option<&'f str>>,
        args: &[&dyn Display],
    ) -> Result<(), WarningError> {
        let format = format.into().ok_or(WarningError::MissingFormat)?;
        if !is_descriptive(format) {
            return Err(WarningError::NonDescriptiveFormat {
                format: format.to_owned(),
            });
        }

        if self
            .ignored_prefix
            .as_deref()
            .is_some_and(|prefix| format.starts_with(prefix))
        {
            tracing::trace!(target: "prop_types", format, "ignored legacy warning");
            return Ok(());
        }

        if !condition {
            let message = format!("Warning: {}", Interpolated { format, args });
            self.sink.emit(&message);
            let backtrace = Backtrace::capture();
            tracing::trace!(target: "prop_types", %backtrace, "warning emitted");
        }
        Ok(())
    }
}

impl Default for WarningChannel {
    fn default() -> Self {
        Self::strict()
    }
}

impl fmt::Debug for WarningChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WarningChannel")
            .field("ignored_prefix", &self.ignored_prefix)
            .finish_non_exhaustive()
    }
}

static DEFAULT_CHANNEL: LazyLock<WarningChannel> = LazyLock::new(WarningChannel::strict);

/// Emits through the process-wide strict channel.
///
/// See [`WarningChannel::warn`].
///
/// # Errors
///
/// Same as [`WarningChannel::warn`].
pub fn warning<'f>(
    condition: bool,
    format: impl Into<Option<&'f str>>,
    args: &[&dyn Display],
) -> Result<(), WarningError> {
    DEFAULT_CHANNEL.warn(condition, format, args)
}

/// At least ten UTF-16 units and not made only of `s` and non-word
/// characters (`^[s\W]*$`).
fn is_descriptive(format: &str) -> bool {
    if format.encode_utf16().count() < MIN_FORMAT_LEN {
        return false;
    }
    !format
        .chars()
        .all(|c| c == 's' || !(c.is_ascii_alphanumeric() || c == '_'))
}

struct Interpolated<'a> {
    format: &'a str,
    args: &'a [&'a dyn Display],
}

impl Display for Interpolated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut args = self.args.iter();
        let mut pieces = self.format.split("%s");
        if let Some(first) = pieces.next() {
            f.write_str(first)?;
        }
        for piece in pieces {
            match args.next() {
                Some(arg) => arg.fmt(f)?,
                None => f.write_str("undefined")?,
            }
            f.write_str(piece)?;
        }
        Ok(())
    }
}
