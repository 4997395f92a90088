//! Line codec for the server connection.
//!
//! Wraps [`LinesCodec`] so that an overlong or non-UTF-8 line is dropped
//! inside the decoder. A decoder error would otherwise end the `Framed`
//! stream, and with it the session.

use bytes::BytesMut;
use std::io;
use tokio_util::codec::{Decoder, Encoder, LinesCodec, LinesCodecError};
use tracing::warn;

/// Longest line accepted from the server (IRCv3 tags plus a 512-byte body).
pub const MAX_LINE_LENGTH: usize = 8191;

/// Newline-delimited codec that skips lines it cannot use.
#[derive(Debug)]
pub struct ServerLineCodec {
    inner: LinesCodec,
}

impl ServerLineCodec {
    pub fn new() -> Self {
        Self::with_max_length(MAX_LINE_LENGTH)
    }

    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            inner: LinesCodec::new_with_max_length(max_length),
        }
    }

    fn skip(&self, err: LinesCodecError) -> Result<(), LinesCodecError> {
        match err {
            LinesCodecError::MaxLineLengthExceeded => {
                warn!(max = self.inner.max_length(), "Dropping overlong line");
                Ok(())
            }
            LinesCodecError::Io(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(error = %e, "Dropping non-UTF-8 line");
                Ok(())
            }
            other => Err(other),
        }
    }
}

impl Default for ServerLineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for ServerLineCodec {
    type Item = String;
    type Error = LinesCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<String>, LinesCodecError> {
        // The inner codec keeps discarding state, so retrying resumes after
        // the bad line.
        loop {
            match self.inner.decode(buf) {
                Err(e) => self.skip(e)?,
                other => return other,
            }
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<String>, LinesCodecError> {
        loop {
            match self.inner.decode_eof(buf) {
                Err(e) => self.skip(e)?,
                other => return other,
            }
        }
    }
}

impl Encoder<String> for ServerLineCodec {
    type Error = LinesCodecError;

    fn encode(&mut self, line: String, dst: &mut BytesMut) -> Result<(), LinesCodecError> {
        self.inner.encode(line, dst)
    }
}
