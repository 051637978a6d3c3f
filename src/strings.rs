//! Tokenizer-based splitting for device and flag strings.
//!
//! Hand-rolled on purpose: the inputs are tiny ASCII-delimited config
//! strings and every utility here has a partial-result contract — parse as
//! far as the input is well-formed, hand back what was recognized. Only
//! [`parse_vector`] diagnoses its failure, since its caller must keep the
//! previous value on error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pull-based token scanner over an ASCII-delimited string.
///
/// A token is either a single reserved character or a run of characters up
/// to the next whitespace/reserved character. Leading ASCII whitespace is
/// consumed and never part of a token. Delimiter sets are per call, so one
/// scanner can switch alphabets mid-stream.
pub struct Tokenizer<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, pos: 0 }
    }

    /// Next token, or `None` once the input is exhausted.
    ///
    /// `reserved` must be ASCII; multi-byte characters in the input are
    /// treated as ordinary token bytes.
    pub fn next_token(&mut self, reserved: &str) -> Option<&'a str> {
        let bytes = self.s.as_bytes();
        let reserved = reserved.as_bytes();

        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if self.pos == bytes.len() {
            return None;
        }

        let start = self.pos;
        if reserved.contains(&bytes[self.pos]) {
            self.pos += 1;
            return Some(&self.s[start..self.pos]);
        }
        while self.pos < bytes.len()
            && !bytes[self.pos].is_ascii_whitespace()
            && !reserved.contains(&bytes[self.pos])
        {
            self.pos += 1;
        }
        Some(&self.s[start..self.pos])
    }
}

/// Split a flags string on delimiter characters, discarding whitespace.
///
/// Flags must start alphanumerically and be separated by exactly one
/// delimiter character; scanning stops at the first token that breaks the
/// pattern and returns whatever was collected up to it.
pub fn split(flags: &str, delim: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut tokenizer = Tokenizer::new(flags);
    loop {
        let Some(flag) = tokenizer.next_token(delim) else {
            return result;
        };
        if !flag.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
            return result;
        }
        result.push(flag.to_string());

        // the delimiter itself, discarded; its absence ends the scan
        match tokenizer.next_token(delim) {
            Some(token) if token.len() == 1 && delim.contains(token) => {}
            _ => return result,
        }
    }
}

/// Failure detail for [`parse_vector`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParseVectorError {
    #[error("expected an integer at byte {0}")]
    InvalidInt(usize),
    #[error("integer out of range at byte {0}")]
    OutOfRange(usize),
}

/// Parse an integer vector written with `,`, `{` and `}` delimiters, e.g.
/// `0{4,300,0,-112343,350}9` parses to `[0, 4, 300, 0, -112343, 350, 9]`.
///
/// At most one delimiter is skipped before each integer; anything else that
/// is not part of an integer fails the whole parse, leaving the caller's
/// previous data untouched.
pub fn parse_vector(s: &str) -> Result<Vec<i32>, ParseVectorError> {
    let bytes = s.as_bytes();
    let mut values = Vec::new();
    let mut pos = 0;
    while pos < bytes.len() {
        if matches!(bytes[pos], b',' | b'{' | b'}') {
            pos += 1;
        }
        let start = pos;
        if pos < bytes.len() && bytes[pos] == b'-' {
            pos += 1;
        }
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        let digits = &s[start..pos];
        if digits.is_empty() || digits == "-" {
            return Err(ParseVectorError::InvalidInt(start));
        }
        let value: i32 = digits.parse().map_err(|_| ParseVectorError::OutOfRange(start))?;
        values.push(value);
    }
    Ok(values)
}

/// One parsed entry of a devices string; the address may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceAddress {
    pub device: String,
    pub address: String,
}

/// Parse a devices string of the grammar
///
/// ```text
/// devices     = device_addr | device_addr "|" devices
/// device_addr = device | "(" device "," addr ")"
/// ```
///
/// e.g. `speaker|(bt_a2dp, 00:11:22:33)|mic`. Devices must start
/// alphanumerically. A malformation ends the scan early, returning the
/// entries parsed so far.
pub fn parse_device_addresses(devices: &str) -> Vec<DeviceAddress> {
    const DELIM: &str = "()|,";

    let mut result = Vec::new();
    let mut tokenizer = Tokenizer::new(devices);
    loop {
        let Some(mut device) = tokenizer.next_token(DELIM) else {
            return result;
        };
        let mut address = "";
        if device == "(" {
            // a pair, otherwise we consider it a bare device
            let Some(inner) = tokenizer.next_token(DELIM) else {
                return result;
            };
            device = inner;
            if tokenizer.next_token(DELIM) != Some(",") {
                return result; // malformed, must have a comma
            }

            let Some(addr) = tokenizer.next_token(DELIM) else {
                return result;
            };
            if addr == ")" {
                // empty address, just the ")"
            } else {
                address = addr;
                if tokenizer.next_token(DELIM) != Some(")") {
                    return result;
                }
            }
        }
        // misaligned token, device must start alphanumeric
        if !device.chars().next().is_some_and(|c| c.is_ascii_alphanumeric()) {
            return result;
        }

        result.push(DeviceAddress {
            device: device.to_string(),
            address: address.to_string(),
        });

        // end of string lands here too
        if tokenizer.next_token(DELIM) != Some("|") {
            return result;
        }
    }
}
