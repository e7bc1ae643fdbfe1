// Thu Oct 15 2026 - Alex

use crate::pattern::{Element, PatternError, Signature};
use std::fmt;

/// How the text of a specification is turned into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// IDA-style hex pattern, e.g. `12 34 ? 78`.
    HexPattern,
    /// One byte per UTF-16 code unit; every unit must be <= 0xFF.
    Narrow,
    /// Two bytes per UTF-16 code unit, low byte first.
    WideLe,
    /// Two bytes per UTF-16 code unit, high byte first.
    WideBe,
}

impl Encoding {
    /// The long flag name without its leading dashes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HexPattern => "pattern",
            Self::Narrow => "narrow",
            Self::WideLe => "wide",
            Self::WideBe => "widebe",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Self::HexPattern => "--pattern",
            Self::Narrow => "--narrow",
            Self::WideLe => "--wide",
            Self::WideBe => "--widebe",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    pub encoding: Encoding,
    pub text: String,
}

impl Specification {
    pub fn new(encoding: Encoding, text: impl Into<String>) -> Self {
        Self {
            encoding,
            text: text.into(),
        }
    }

    pub fn hex(text: impl Into<String>) -> Self {
        Self::new(Encoding::HexPattern, text)
    }

    pub fn narrow(text: impl Into<String>) -> Self {
        Self::new(Encoding::Narrow, text)
    }

    pub fn wide_le(text: impl Into<String>) -> Self {
        Self::new(Encoding::WideLe, text)
    }

    pub fn wide_be(text: impl Into<String>) -> Self {
        Self::new(Encoding::WideBe, text)
    }

    pub fn compile(&self) -> Result<Signature, PatternError> {
        compile(self.encoding, &self.text)
    }
}

/// Maps a hex digit to its value. Anything outside `0-9a-fA-F`,
/// including every non-ASCII character, yields `None`.
pub fn nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 0xA),
        'A'..='F' => Some(c as u8 - b'A' + 0xA),
        _ => None,
    }
}

// C locale isspace: includes vertical tab, unlike char::is_ascii_whitespace.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn compile(encoding: Encoding, text: &str) -> Result<Signature, PatternError> {
    match encoding {
        Encoding::HexPattern => compile_hex(text),
        Encoding::Narrow => compile_narrow(text),
        Encoding::WideLe => compile_wide(text, u16::to_le_bytes),
        Encoding::WideBe => compile_wide(text, u16::to_be_bytes),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HexState {
    AfterSpace,
    AfterFirst(u8),
    AfterSecond,
    AfterWildcard,
}

impl HexState {
    /// Advances the machine by one character, pushing any completed
    /// element. `None` means the character is not allowed here.
    fn step(self, c: char, elements: &mut Vec<Element>) -> Option<HexState> {
        match self {
            HexState::AfterSpace => {
                if is_space(c) {
                    Some(HexState::AfterSpace)
                } else if c == '?' {
                    elements.push(Element::wildcard());
                    Some(HexState::AfterWildcard)
                } else {
                    nibble(c).map(HexState::AfterFirst)
                }
            }
            HexState::AfterFirst(high) => {
                let low = nibble(c)?;
                elements.push(Element::fixed((high << 4) | low));
                Some(HexState::AfterSecond)
            }
            HexState::AfterSecond => is_space(c).then_some(HexState::AfterSpace),
            HexState::AfterWildcard => {
                if is_space(c) {
                    Some(HexState::AfterSpace)
                } else if c == '?' {
                    // a run like `??` stands for a single wildcard byte
                    Some(HexState::AfterWildcard)
                } else {
                    None
                }
            }
        }
    }
}

fn compile_hex(text: &str) -> Result<Signature, PatternError> {
    let mut elements = Vec::new();
    let mut state = HexState::AfterSpace;

    for (position, c) in text.chars().enumerate() {
        state = state.step(c, &mut elements).ok_or_else(|| PatternError::InvalidCharacter {
            pattern: text.to_string(),
            position,
            ch: c,
        })?;
    }

    if let HexState::AfterFirst(_) = state {
        return Err(PatternError::DanglingNibble(text.to_string()));
    }

    Signature::new(elements).ok_or_else(|| PatternError::EmptyPattern(text.to_string()))
}

fn compile_narrow(text: &str) -> Result<Signature, PatternError> {
    let elements = text.chars()
        .map(|ch| {
            u8::try_from(u32::from(ch))
                .map(Element::fixed)
                .map_err(|_| PatternError::NarrowOutOfRange {
                    text: text.to_string(),
                    ch,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Signature::new(elements).ok_or(PatternError::EmptyString)
}

fn compile_wide(text: &str, to_bytes: fn(u16) -> [u8; 2]) -> Result<Signature, PatternError> {
    let elements = text.encode_utf16()
        .flat_map(to_bytes)
        .map(Element::fixed)
        .collect();

    Signature::new(elements).ok_or(PatternError::EmptyString)
}
