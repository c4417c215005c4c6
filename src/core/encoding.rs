//! Text encodings for byte-oriented handlers
//!
//! File and socket handlers emit bytes, not text. `Encoding` controls how
//! an entry is turned into bytes and `EncodingPolicy` what happens when a
//! character is not representable.

use super::error::{LoggerError, Result};
use std::borrow::Cow;

/// Destination text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8, the default. Lossless for any Rust string.
    #[default]
    Utf8,
    /// 7-bit ASCII.
    Ascii,
    /// ISO-8859-1, one byte per code point up to U+00FF.
    Latin1,
}

/// What to do with characters the encoding cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingPolicy {
    /// Fail the write rather than substitute.
    #[default]
    Strict,
    /// Substitute `?` for each unrepresentable character.
    Replace,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Ascii => "ascii",
            Encoding::Latin1 => "latin-1",
        }
    }

    /// Encode `text` under `policy`.
    ///
    /// Round-trips losslessly for any text the encoding can represent;
    /// borrows the input where the bytes are already in the right shape.
    pub fn encode<'a>(&self, text: &'a str, policy: EncodingPolicy) -> Result<Cow<'a, [u8]>> {
        match self {
            Encoding::Utf8 => Ok(Cow::Borrowed(text.as_bytes())),
            Encoding::Ascii => {
                if text.is_ascii() {
                    return Ok(Cow::Borrowed(text.as_bytes()));
                }
                self.encode_narrow(text, policy, |c| u32::from(c) < 0x80)
            }
            Encoding::Latin1 => self.encode_narrow(text, policy, |c| u32::from(c) < 0x100),
        }
    }

    fn encode_narrow(
        &self,
        text: &str,
        policy: EncodingPolicy,
        fits: impl Fn(char) -> bool,
    ) -> Result<Cow<'static, [u8]>> {
        let mut bytes = Vec::with_capacity(text.len());
        for c in text.chars() {
            if fits(c) {
                bytes.push(c as u8);
            } else {
                match policy {
                    EncodingPolicy::Strict => {
                        return Err(LoggerError::unencodable(
                            self.name(),
                            format!("'{}' (U+{:04X}) is not representable", c, u32::from(c)),
                        ));
                    }
                    EncodingPolicy::Replace => bytes.push(b'?'),
                }
            }
        }
        Ok(Cow::Owned(bytes))
    }
}
