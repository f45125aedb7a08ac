//! Message formatting
//!
//! Every check carries a [`MessageHolder`] describing what was verified. The
//! holder is cheap to build and is only rendered when a reporter needs text:
//!
//! - [`MessageHolder::Text`] formats an unlocalized pattern.
//! - [`MessageHolder::Key`] resolves a [`MessageKey`] through the configured
//!   [`MessageSource`] for the current [`Locale`], then formats it.
//!
//! Patterns use positional `{0}`-style placeholders; see [`format_pattern`].

mod format;
mod holder;
mod key;
mod locale;
mod source;

pub use format::{Args, Debugged, format_pattern};
pub use holder::MessageHolder;
pub use key::{MessageKey, keys};
pub use locale::{Locale, LocaleParseError};
pub use source::{BuiltinMessages, MessageCatalog, MessageSource, resolve_pattern};
