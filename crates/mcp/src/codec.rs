// Newline-delimited framing for the stdio transport
//
// Lines are framed as raw bytes so that a malformed line (invalid UTF-8 or
// over the size cap) is reported per line and the stream keeps going.

use bytes::{BufMut, BytesMut};
use std::io;
use tokio_util::codec::{Decoder, Encoder};

/// Largest accepted input line, newline excluded.
pub const MAX_LINE_BYTES: usize = 4 * 1024 * 1024;

/// A line that could not be turned into text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("line exceeds {0} bytes")]
    TooLong(usize),
    #[error("line is not valid UTF-8")]
    NotUtf8,
}

#[derive(Debug)]
pub struct JsonLineCodec {
    max_length: usize,
    // Bytes before this offset are known to contain no newline.
    next_index: usize,
    // Set while skipping the rest of an oversized line.
    discarding: bool,
}

impl JsonLineCodec {
    pub fn new() -> Self {
        Self::with_max_length(MAX_LINE_BYTES)
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length,
            next_index: 0,
            discarding: false,
        }
    }

    fn text(line: &[u8]) -> Result<String, LineError> {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        std::str::from_utf8(line)
            .map(str::to_string)
            .map_err(|_| LineError::NotUtf8)
    }
}

impl Default for JsonLineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for JsonLineCodec {
    type Item = Result<String, LineError>;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, io::Error> {
        let newline = buf[self.next_index..]
            .iter()
            .position(|b| *b == b'\n')
            .map(|offset| self.next_index + offset);

        match newline {
            Some(end) => {
                self.next_index = 0;
                let frame = buf.split_to(end + 1);
                if std::mem::take(&mut self.discarding) || end > self.max_length {
                    return Ok(Some(Err(LineError::TooLong(self.max_length))));
                }
                Ok(Some(Self::text(&frame[..end])))
            }
            None if self.discarding || buf.len() > self.max_length => {
                self.discarding = true;
                self.next_index = 0;
                buf.clear();
                Ok(None)
            }
            None => {
                self.next_index = buf.len();
                Ok(None)
            }
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, io::Error> {
        if let Some(item) = self.decode(buf)? {
            return Ok(Some(item));
        }

        self.next_index = 0;
        if std::mem::take(&mut self.discarding) {
            buf.clear();
            return Ok(Some(Err(LineError::TooLong(self.max_length))));
        }
        if buf.is_empty() {
            return Ok(None);
        }

        let rest = buf.split_to(buf.len());
        Ok(Some(Self::text(&rest)))
    }
}

impl Encoder<String> for JsonLineCodec {
    type Error = io::Error;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<(), io::Error> {
        dst.reserve(line.len() + 1);
        dst.put_slice(line.as_bytes());
        dst.put_u8(b'\n');
        Ok(())
    }
}
