// Thu Oct 15 2026 - Alex

use std::fmt;

/// One position of a signature. A wildcard element matches any byte and
/// always stores 0 as its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element {
    value: u8,
    fixed: bool,
}

impl Element {
    pub const WILDCARD: Element = Element { value: 0, fixed: false };

    pub const fn fixed(value: u8) -> Self {
        Self { value, fixed: true }
    }

    pub const fn wildcard() -> Self {
        Self::WILDCARD
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn is_wildcard(&self) -> bool {
        !self.fixed
    }

    #[inline]
    pub fn matches(&self, byte: u8) -> bool {
        !self.fixed || self.value == byte
    }
}

impl From<u8> for Element {
    fn from(byte: u8) -> Self {
        Self::fixed(byte)
    }
}

/// An ordered, non-empty run of elements that must appear contiguously in
/// the scanned buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    elements: Vec<Element>,
}

impl Signature {
    /// Returns `None` for an empty element list.
    pub fn new(elements: Vec<Element>) -> Option<Self> {
        if elements.is_empty() {
            return None;
        }
        Some(Self { elements })
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        Self::new(bytes.iter().copied().map(Element::fixed).collect())
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    // Always false for a constructed signature.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn fixed_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_fixed()).count()
    }

    pub fn wildcard_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_wildcard()).count()
    }

    pub fn matches_at(&self, window: &[u8]) -> bool {
        window.len() >= self.elements.len()
            && self.elements.iter()
                .zip(window.iter())
                .all(|(element, &byte)| element.matches(byte))
    }

    pub fn to_ida_string(&self) -> String {
        self.elements.iter()
            .map(|e| {
                if e.is_fixed() {
                    format!("{:02X}", e.value())
                } else {
                    "?".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ida_string())
    }
}

impl AsRef<[Element]> for Signature {
    fn as_ref(&self) -> &[Element] {
        &self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_signature_rejected() {
        assert!(Signature::new(Vec::new()).is_none());
        assert!(Signature::from_bytes(&[]).is_none());
    }

    #[test]
    fn test_element_matching() {
        assert!(Element::fixed(0x41).matches(0x41));
        assert!(!Element::fixed(0x41).matches(0x42));
        for byte in 0..=u8::MAX {
            assert!(Element::wildcard().matches(byte));
        }
        assert_eq!(Element::wildcard().value(), 0);
    }

    #[test]
    fn test_signature_counts_and_display() {
        let sig = Signature::new(vec![
            Element::fixed(0x41),
            Element::wildcard(),
            Element::fixed(0x0C),
        ]).unwrap();

        assert_eq!(sig.len(), 3);
        assert_eq!(sig.fixed_count(), 2);
        assert_eq!(sig.wildcard_count(), 1);
        assert_eq!(sig.to_string(), "41 ? 0C");
    }

    #[test]
    fn test_matches_at_requires_full_window() {
        let sig = Signature::from_bytes(&[0x41, 0x42]).unwrap();
        assert!(sig.matches_at(&[0x41, 0x42, 0x00]));
        assert!(!sig.matches_at(&[0x41]));
        assert!(!sig.matches_at(&[0x42, 0x41]));
    }
}
