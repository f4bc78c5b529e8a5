//! Dispatcher configuration and caller-side handling of unmatched values.

use crate::DispatchError;

/// What a caller does with a value no handler accepts.
///
/// The dispatcher only reports `NoMatchingHandler`; the policy is applied by
/// whoever consumes the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnmatchedPolicy {
    /// Keep the error.
    #[default]
    Error,
    /// Treat the value as handled with no result.
    Ignore,
    /// Like `Ignore`, but log a warning.
    Warn,
}

/// Dispatcher configuration options.
#[derive(Clone, Debug)]
pub struct DispatcherConfig {
    /// Name used in log events.
    pub label: String,
    pub unmatched: UnmatchedPolicy,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            label: "dispatcher".to_string(),
            unmatched: UnmatchedPolicy::Error,
        }
    }
}

impl DispatcherConfig {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn with_unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }
}

pub trait DispatchResultExt<R> {
    /// Applies `policy` to a `NoMatchingHandler` error. Other errors pass through.
    fn unmatched(self, policy: UnmatchedPolicy) -> Result<Option<R>, DispatchError>;
}

impl<R> DispatchResultExt<R> for Result<R, DispatchError> {
    fn unmatched(self, policy: UnmatchedPolicy) -> Result<Option<R>, DispatchError> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_unmatched() => match policy {
                UnmatchedPolicy::Error => Err(err),
                UnmatchedPolicy::Ignore => Ok(None),
                UnmatchedPolicy::Warn => {
                    tracing::warn!(shape = %err.shape(), "value dispatched with no matching handler");
                    Ok(None)
                }
            },
            Err(err) => Err(err),
        }
    }
}
