//! Byte-level extraction of test functions from C source text.
//!
//! The extractor is a tagged-state machine over one file's bytes. It locates
//! the `void` return-type marker, captures the function name up to the
//! opening parenthesis, then copies everything until the braces balance out.
//!
//! Brace counting is purely textual: braces inside string literals, character
//! literals, or comments count as real nesting changes. That is a scope
//! boundary of the scanner, pinned by test, not a defect.

use std::borrow::Cow;
use std::fmt;

use tracing::trace;

use crate::buffer::Buffer;
use crate::error::{Error, ExtractError, Result};

/// Return-type marker that opens every test function.
const MARKER: [u8; 4] = *b"void";

/// Scanner states. `SeekMarker` is the only state in which running out of
/// input is a clean end-of-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Rolling 4-byte window looking for the marker.
    SeekMarker,
    /// Marker seen; skipping whitespace up to the first name byte.
    StartName,
    /// Accumulating the name until `(`.
    ScanName,
    /// Copying the body, tracking brace depth.
    InBody,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self {
            State::SeekMarker => "seeking return-type marker",
            State::StartName => "skipping to function name",
            State::ScanName => "scanning function name",
            State::InBody => "scanning function body",
        };
        f.write_str(phase)
    }
}

/// One extracted test function: the owning file, the function name as a span
/// into the text, and the verbatim source text (signature and body, closed
/// off with a blank line).
#[derive(Debug, Clone)]
pub struct Case {
    file_name: String,
    name_start: usize,
    name_len: usize,
    text: Vec<u8>,
}

impl Case {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn name(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text[self.name_start..self.name_start + self.name_len])
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }
}

pub struct Extractor<'a> {
    input: &'a [u8],
    pos: usize,
    state: State,
    window: [u8; 4],
    buf: Buffer<u8>,
    name_start: usize,
    name_len: usize,
    depth: i32,
}

impl<'a> Extractor<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            state: State::SeekMarker,
            window: [0; 4],
            buf: Buffer::new(),
            name_start: 0,
            name_len: 0,
            depth: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Pull the next function out of the input. `Ok(None)` is clean
    /// end-of-file; end-of-input in any other state means the file is
    /// malformed.
    pub fn next_case(&mut self, file_name: &str) -> Result<Option<Case>> {
        while self.pos < self.input.len() {
            let byte = self.input[self.pos];
            self.pos += 1;
            if let Some(case) = self.step(byte, file_name)? {
                return Ok(Some(case));
            }
        }
        match self.state {
            State::SeekMarker => Ok(None),
            state => Err(ExtractError::UnexpectedEof { state }.into()),
        }
    }

    fn step(&mut self, byte: u8, file_name: &str) -> Result<Option<Case>> {
        match self.state {
            State::SeekMarker => {
                self.window.rotate_left(1);
                self.window[3] = byte;
                if self.window == MARKER {
                    self.buf.extend_from_slice(&MARKER)?;
                    self.state = State::StartName;
                    trace!("marker found at offset {}", self.pos);
                }
            }
            State::StartName => {
                self.buf.push(byte)?;
                if !byte.is_ascii_whitespace() {
                    self.name_start = self.buf.len() - 1;
                    self.state = State::ScanName;
                }
            }
            State::ScanName => {
                self.buf.push(byte)?;
                if byte == b'(' {
                    self.name_len = (self.buf.len() - 1) - self.name_start;
                    self.state = State::InBody;
                }
            }
            State::InBody => {
                self.buf.push(byte)?;
                match byte {
                    b'{' => self.depth += 1,
                    b'}' => {
                        self.depth -= 1;
                        if self.depth == 0 {
                            return Ok(Some(self.emit(file_name)?));
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(None)
    }

    fn emit(&mut self, file_name: &str) -> std::result::Result<Case, Error> {
        self.buf.push_str("\n\n")?;
        let text = std::mem::take(&mut self.buf).into_vec();
        let case = Case {
            file_name: file_name.to_string(),
            name_start: self.name_start,
            name_len: self.name_len,
            text,
        };
        trace!("extracted '{}' from '{}'", case.name(), file_name);

        self.window = [0; 4];
        self.name_start = 0;
        self.name_len = 0;
        self.state = State::SeekMarker;
        Ok(case)
    }
}

/// Run the extractor over a whole file, accumulating every emitted case.
pub fn extract_cases(file_name: &str, input: &[u8]) -> Result<Buffer<Case>> {
    let mut extractor = Extractor::new(input);
    let mut cases = Buffer::new();
    while let Some(case) = extractor.next_case(file_name)? {
        cases.push(case)?;
    }
    Ok(cases)
}
