// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::env;

use std::{fmt, sync::atomic::AtomicUsize, write};

use std::fmt::Write;
use tracing::Level;
use tracing::{field::Visit, Id, Subscriber};
use tracing_core::Field;

pub struct StringVisitor<'a> {
    string: &'a mut String,
}
impl<'a> StringVisitor<'a> {
    pub(crate) fn new(string: &'a mut String) -> Self {
        StringVisitor { string }
    }
}

impl Visit for StringVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.string, "{value:?} ");
        } else {
            let _ = write!(self.string, "{} = {:?}; ", field.name(), value);
        }
    }
}

#[derive(Debug, PartialEq)]
struct LogFilter {
    target: Option<String>,
    level: Option<Level>,
}

/// Stderr subscriber driven by `RUST_LOG`, so log lines never mix with the
/// timeline printed on stdout.
pub struct MinimalTracer {
    enabled: bool,
    filters: Vec<LogFilter>,
}

fn string_to_level(string: &str) -> Option<Level> {
    match string.to_lowercase().as_str() {
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "warn" | "warning" => Some(Level::WARN),
        "trace" => Some(Level::TRACE),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

fn parse_filters(env_value: &str) -> Vec<LogFilter> {
    let mut filters: Vec<LogFilter> = Vec::with_capacity(10);
    for filter in env_value.split(',').map(str::trim).filter(|f| !f.is_empty()) {
        let (mut target, mut level) = match filter.split_once('=') {
            Some((target, level)) => (Some(target), string_to_level(level)),
            None => (Some(filter), None),
        };

        if let Some(target_level) = target.and_then(string_to_level) {
            level = Some(target_level);
            target = None;
        }

        filters.push(LogFilter {
            target: target.map(|v| v.to_string()),
            level,
        });
    }
    filters
}

impl MinimalTracer {
    pub fn register() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
        let (enabled, filters) = match env::var("RUST_LOG") {
            Ok(env_value) => (true, parse_filters(&env_value)),
            Err(_) => (false, Vec::new()),
        };

        tracing::subscriber::set_global_default(MinimalTracer { enabled, filters })
    }

    fn matches(&self, metadata: &tracing::Metadata<'_>) -> bool {
        if !self.enabled {
            return false;
        }
        if self.filters.is_empty() {
            return true;
        }
        self.filters.iter().any(|filter| {
            let level_matches = filter
                .level
                .map(|level| metadata.level() <= &level)
                .unwrap_or(true);
            let target_matches = filter
                .target
                .as_ref()
                .map(|target| metadata.target().starts_with(target.as_str()))
                .unwrap_or(true);
            level_matches && target_matches
        })
    }
}

static AUTO_ID: AtomicUsize = AtomicUsize::new(1);

impl Subscriber for MinimalTracer {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        self.matches(metadata)
    }

    fn new_span(&self, _span: &tracing_core::span::Attributes<'_>) -> tracing_core::span::Id {
        Id::from_u64(AUTO_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed) as u64)
    }

    fn record(&self, _span: &tracing_core::span::Id, _values: &tracing_core::span::Record<'_>) {}

    fn record_follows_from(
        &self,
        _span: &tracing_core::span::Id,
        _follows: &tracing_core::span::Id,
    ) {
    }

    fn event(&self, event: &tracing::Event<'_>) {
        let metadata = event.metadata();

        let level = metadata.level();
        let target = metadata.target();

        let mut text = String::new();

        let mut visitor = StringVisitor::new(&mut text);
        event.record(&mut visitor);

        eprintln!("{level} {target}: {text}");
    }

    fn enter(&self, _span: &tracing_core::span::Id) {}

    fn exit(&self, _span: &tracing_core::span::Id) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters() {
        assert_eq!(
            parse_filters("warn, tzline_timezone=debug,tzline_core"),
            vec![
                LogFilter {
                    target: None,
                    level: Some(Level::WARN)
                },
                LogFilter {
                    target: Some("tzline_timezone".to_string()),
                    level: Some(Level::DEBUG)
                },
                LogFilter {
                    target: Some("tzline_core".to_string()),
                    level: None
                },
            ]
        );
        assert!(parse_filters("").is_empty());
    }
}
