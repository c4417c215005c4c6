//! Property-based tests for sinklog using proptest

use proptest::prelude::*;
use sinklog::prelude::*;
use std::io;
use std::sync::Arc;

fn any_verbosity() -> impl Strategy<Value = Verbosity> {
    prop_oneof![
        Just(Verbosity::Debug),
        Just(Verbosity::Info),
        Just(Verbosity::Warning),
        Just(Verbosity::Error),
        Just(Verbosity::Exception),
    ]
}

// ============================================================================
// Verbosity Tests
// ============================================================================

proptest! {
    /// Comparison agrees with the declared rank, totally and transitively
    #[test]
    fn test_verbosity_ordering(a in any_verbosity(), b in any_verbosity()) {
        let ra = a as u8;
        let rb = b as u8;

        prop_assert_eq!(a < b, ra < rb);
        prop_assert_eq!(a <= b, ra <= rb);
        prop_assert_eq!(a > b, ra > rb);
        prop_assert_eq!(a >= b, ra >= rb);
        prop_assert_eq!(a == b, ra == rb);
    }

    /// Display/parse round trip
    #[test]
    fn test_verbosity_str_roundtrip(v in any_verbosity()) {
        let parsed: Verbosity = v.to_str().parse().unwrap();
        prop_assert_eq!(parsed, v);
        prop_assert_eq!(format!("{}", v), v.to_str());
    }

    /// Syslog mapping lands on real severity codes and collapses
    /// everything at Error and above to ERR
    #[test]
    fn test_verbosity_syslog_mapping(v in any_verbosity()) {
        let sev = v.as_syslog();
        prop_assert!(matches!(sev, 3 | 4 | 6 | 7));
        if v >= Verbosity::Error {
            prop_assert_eq!(sev, 3);
        }
    }
}

// ============================================================================
// Encoding Tests
// ============================================================================

proptest! {
    /// UTF-8 is lossless for any string
    #[test]
    fn test_utf8_lossless(text in ".*") {
        let bytes = Encoding::Utf8.encode(&text, EncodingPolicy::Strict).unwrap();
        prop_assert_eq!(bytes.as_ref(), text.as_bytes());
    }

    /// ASCII text survives every encoding byte for byte
    #[test]
    fn test_ascii_text_universal(text in "[ -~]*") {
        for encoding in [Encoding::Utf8, Encoding::Ascii, Encoding::Latin1] {
            let bytes = encoding.encode(&text, EncodingPolicy::Strict).unwrap();
            prop_assert_eq!(bytes.as_ref(), text.as_bytes());
        }
    }

    /// Replace policy always yields one byte per character
    #[test]
    fn test_replace_policy_length(text in ".*") {
        let bytes = Encoding::Latin1.encode(&text, EncodingPolicy::Replace).unwrap();
        prop_assert_eq!(bytes.len(), text.chars().count());
    }
}

// ============================================================================
// Syslog Priority Tests
// ============================================================================

proptest! {
    /// PRI arithmetic: facility in the high bits, severity in the low three
    #[test]
    fn test_priority_arithmetic(facility in 0u8..24, v in any_verbosity()) {
        let priority = facility * 8 + v.as_syslog();
        prop_assert_eq!(priority >> 3, facility);
        prop_assert_eq!(priority & 0b111, v.as_syslog());
        prop_assert!(priority < 192);
    }
}

// ============================================================================
// Logger Dispatch Tests
// ============================================================================

#[derive(Clone)]
struct SharedStream(Arc<parking_lot::Mutex<Vec<u8>>>);

impl io::Write for SharedStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

proptest! {
    /// The message value passes through interpolation untouched, braces
    /// and all; placeholder syntax only applies to the template itself
    #[test]
    fn test_message_passthrough(message in "[^\r\n]*") {
        let buffer = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let logger = Logger::builder("prop")
            .template("{message}")
            .handler(
                StreamHandler::new(SharedStream(Arc::clone(&buffer)))
                    .with_min_verbosity(Verbosity::Debug),
            )
            .build();

        logger.debug(message.clone()).unwrap();

        let output = String::from_utf8(buffer.lock().clone()).unwrap();
        prop_assert_eq!(output, format!("{}\n", message));
    }

    /// A handler observes exactly the calls at or above its threshold
    #[test]
    fn test_threshold_filtering(threshold in any_verbosity(), call in any_verbosity()) {
        let buffer = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let logger = Logger::builder("prop")
            .template("{message}")
            .handler(
                StreamHandler::new(SharedStream(Arc::clone(&buffer)))
                    .with_min_verbosity(threshold),
            )
            .build();

        logger.log(call, "entry").unwrap();

        let written = !buffer.lock().is_empty();
        prop_assert_eq!(written, call >= threshold);
    }
}
