/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::Priority;
use std::sync::{Arc, Mutex};

/// Destination for formatted log lines
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, priority: Priority, tag: &str, message: &str);
}

/// Writes `P/tag: message` lines to stderr, the way `adb logcat -v brief` prints them
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, priority: Priority, tag: &str, message: &str) {
        eprintln!("{}/{}: {}", priority.as_char(), tag, message);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub priority: Priority,
    pub tag: String,
    pub message: String,
}

/// Keeps every record in memory. Clones share the same records.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl LogSink for MemorySink {
    fn write(&self, priority: Priority, tag: &str, message: &str) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(LogRecord {
                priority,
                tag: tag.to_string(),
                message: message.to_string(),
            });
    }
}
