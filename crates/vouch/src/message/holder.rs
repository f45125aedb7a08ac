//! Deferred check descriptions.

use std::fmt;

use super::format::{Args, format_pattern};
use super::key::MessageKey;
use super::source::resolve_pattern;
use crate::foundation::ReportContext;

/// A description of what a check verified, rendered only on demand.
///
/// Building a holder only stores borrowed references; the message source is
/// not consulted until [`render`](Self::render) is called, which reporters
/// do only when they need text (the default reporter: on failure).
///
/// A missing message or key renders as the empty string.
#[derive(Clone, Copy)]
pub enum MessageHolder<'a> {
    /// An unlocalized pattern.
    Text {
        message: Option<&'a str>,
        args: Args<'a>,
    },
    /// A symbolic key resolved through the context's message source.
    Key {
        key: Option<MessageKey>,
        args: Args<'a>,
    },
}

impl<'a> MessageHolder<'a> {
    /// Holder for an unlocalized pattern.
    pub fn text(message: &'a str, args: Args<'a>) -> Self {
        Self::Text {
            message: Some(message),
            args,
        }
    }

    /// Holder for a symbolic key.
    pub fn key(key: MessageKey, args: Args<'a>) -> Self {
        Self::Key {
            key: Some(key),
            args,
        }
    }

    /// Holder that renders as the empty string.
    pub fn empty() -> Self {
        Self::Text {
            message: None,
            args: &[],
        }
    }

    /// The key code, for key-based holders.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Key { key: Some(key), .. } => Some(key.code()),
            _ => None,
        }
    }

    /// Renders the message for `context`.
    pub fn render(&self, context: &ReportContext<'_>) -> String {
        match *self {
            Self::Text { message, args } => message
                .map(|pattern| format_pattern(pattern, args))
                .unwrap_or_default(),
            Self::Key { key, args } => match key {
                Some(key) => {
                    let pattern = resolve_pattern(context.messages(), &key, context.locale());
                    format_pattern(&pattern, args)
                }
                None => String::new(),
            },
        }
    }
}

impl fmt::Debug for MessageHolder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { message, args } => f
                .debug_struct("Text")
                .field("message", message)
                .field("args", &args.len())
                .finish(),
            Self::Key { key, args } => f
                .debug_struct("Key")
                .field("key", &key.map(|k| k.code()))
                .field("args", &args.len())
                .finish(),
        }
    }
}
