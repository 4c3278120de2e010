/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Developer log adapter
//!
//! [`LogcatLayer`] is a `tracing_subscriber` layer that forwards every event to a [`LogSink`] as
//! a single line with an Android logcat priority and tag. The tag defaults to the last segment of
//! the event target (`cloudwatchlogs::input` logs as `input`).
//!
//! ```rust
//! use aws_logcat::{LogcatLayer, MemorySink, Priority};
//! use tracing_subscriber::prelude::*;
//!
//! let sink = MemorySink::default();
//! let subscriber = tracing_subscriber::registry()
//!     .with(LogcatLayer::new(sink.clone()).with_min_priority(Priority::Info));
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::info!(operation = "PutLogEvents", "sending request");
//!     tracing::debug!("filtered");
//! });
//! assert_eq!(sink.records().len(), 1);
//! ```

mod sink;

pub use sink::{LogRecord, LogSink, MemorySink, StderrSink};

use std::fmt;
use std::fmt::Write;
use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Longest tag accepted by logcat
pub const MAX_TAG_LEN: usize = 23;

/// Logcat priorities, in increasing order of severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Verbose = 2,
    Debug = 3,
    Info = 4,
    Warn = 5,
    Error = 6,
}

impl Priority {
    /// The letter logcat prints for this priority
    pub fn as_char(self) -> char {
        match self {
            Priority::Verbose => 'V',
            Priority::Debug => 'D',
            Priority::Info => 'I',
            Priority::Warn => 'W',
            Priority::Error => 'E',
        }
    }
}

impl From<&Level> for Priority {
    fn from(level: &Level) -> Self {
        match *level {
            Level::TRACE => Priority::Verbose,
            Level::DEBUG => Priority::Debug,
            Level::INFO => Priority::Info,
            Level::WARN => Priority::Warn,
            Level::ERROR => Priority::Error,
        }
    }
}

/// Derives a logcat tag from an event target: its last `::` segment, cut to [`MAX_TAG_LEN`] bytes
pub fn tag_for_target(target: &str) -> &str {
    let tag = target.rsplit("::").next().unwrap_or(target);
    truncate_tag(tag)
}

fn truncate_tag(tag: &str) -> &str {
    if tag.len() <= MAX_TAG_LEN {
        return tag;
    }
    let mut end = MAX_TAG_LEN;
    while !tag.is_char_boundary(end) {
        end -= 1;
    }
    &tag[..end]
}

/// Collects an event into `message key=value key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn into_line(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.record_debug(field, &value)
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            if !self.fields.is_empty() {
                self.fields.push(' ');
            }
            let _ = write!(self.fields, "{}={:?}", field.name(), value);
        }
    }
}

/// Layer forwarding events to a [`LogSink`]
pub struct LogcatLayer<S> {
    sink: S,
    tag: Option<String>,
    min_priority: Priority,
}

impl<S: LogSink> LogcatLayer<S> {
    pub fn new(sink: S) -> Self {
        LogcatLayer {
            sink,
            tag: None,
            min_priority: Priority::Verbose,
        }
    }

    /// Logs every event under `tag` instead of a tag derived from the event target
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.tag = Some(truncate_tag(&tag).to_string());
        self
    }

    /// Drops events below `priority`
    pub fn with_min_priority(mut self, priority: Priority) -> Self {
        self.min_priority = priority;
        self
    }

    fn accepts(&self, metadata: &Metadata<'_>) -> bool {
        Priority::from(metadata.level()) >= self.min_priority
    }
}

impl<S, Sub> Layer<Sub> for LogcatLayer<S>
where
    S: LogSink,
    Sub: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        let metadata = event.metadata();
        if !self.accepts(metadata) {
            return;
        }
        let tag = match &self.tag {
            Some(tag) => tag.as_str(),
            None => tag_for_target(metadata.target()),
        };
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.sink
            .write(Priority::from(metadata.level()), tag, &visitor.into_line());
    }
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error("a global default subscriber has already been set")]
    AlreadySet(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs a [`LogcatLayer`] writing to stderr under `tag` as the global default subscriber
pub fn init(tag: impl Into<String>) -> Result<(), InitError> {
    let subscriber =
        tracing_subscriber::registry().with(LogcatLayer::new(StderrSink).with_tag(tag));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::{init, tag_for_target, LogRecord, LogcatLayer, MemorySink, Priority};
    use tracing::Level;
    use tracing_subscriber::prelude::*;

    fn capture(layer: LogcatLayer<MemorySink>, sink: &MemorySink, f: impl FnOnce()) -> Vec<LogRecord> {
        tracing::subscriber::with_default(tracing_subscriber::registry().with(layer), f);
        sink.records()
    }

    #[test]
    fn priorities_follow_levels() {
        assert_eq!(Priority::from(&Level::TRACE), Priority::Verbose);
        assert_eq!(Priority::from(&Level::DEBUG), Priority::Debug);
        assert_eq!(Priority::from(&Level::INFO), Priority::Info);
        assert_eq!(Priority::from(&Level::WARN), Priority::Warn);
        assert_eq!(Priority::from(&Level::ERROR), Priority::Error);
        assert_eq!(Priority::Warn as i32, 5);
        assert!(Priority::Error > Priority::Verbose);
    }

    #[test]
    fn tags_from_targets() {
        assert_eq!(tag_for_target("cloudwatchlogs::input"), "input");
        assert_eq!(tag_for_target("smithy_http"), "smithy_http");
        assert_eq!(
            tag_for_target("a::an_exceptionally_long_module_name"),
            "an_exceptionally_long_m"
        );
        assert_eq!(tag_for_target("ééééééééééééé").len(), 22);
    }

    #[test]
    fn forwards_message_and_fields() {
        let sink = MemorySink::default();
        let records = capture(LogcatLayer::new(sink.clone()), &sink, || {
            tracing::warn!(target: "accessanalyzer::input", operation = "GetFinding", status = 404, "request failed");
            tracing::error!(target: "x", code = "Throttling");
        });
        assert_eq!(
            records,
            vec![
                LogRecord {
                    priority: Priority::Warn,
                    tag: "input".to_string(),
                    message: "request failed operation=\"GetFinding\" status=404".to_string(),
                },
                LogRecord {
                    priority: Priority::Error,
                    tag: "x".to_string(),
                    message: "code=\"Throttling\"".to_string(),
                },
            ]
        );
    }

    #[test]
    fn fixed_tag_and_min_priority() {
        let sink = MemorySink::default();
        let layer = LogcatLayer::new(sink.clone())
            .with_tag("AwsClient")
            .with_min_priority(Priority::Info);
        let records = capture(layer, &sink, || {
            tracing::trace!("dropped");
            tracing::debug!("dropped");
            tracing::info!("kept");
        });
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].tag, "AwsClient");
        assert_eq!(records[0].priority, Priority::Info);
        assert_eq!(records[0].message, "kept");
    }

    #[test]
    fn init_only_once() {
        let _ = init("AwsClient");
        assert!(init("AwsClient").is_err());
    }
}
