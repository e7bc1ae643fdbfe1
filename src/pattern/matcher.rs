// Thu Oct 15 2026 - Alex

use crate::pattern::{Element, Signature};

#[inline]
fn element_matches(byte: &u8, element: &Element) -> bool {
    element.matches(*byte)
}

/// Generic "find the next occurrence" primitive: the first index at or after
/// `from` where `needle` lines up with `haystack` under `eq`.
pub fn search_by<T, U, F>(haystack: &[T], from: usize, needle: &[U], eq: F) -> Option<usize>
where
    F: Fn(&T, &U) -> bool,
{
    if needle.is_empty() || from >= haystack.len() || haystack.len() - from < needle.len() {
        return None;
    }

    haystack[from..]
        .windows(needle.len())
        .position(|window| window.iter().zip(needle).all(|(h, n)| eq(h, n)))
        .map(|offset| from + offset)
}

pub fn find_next(buffer: &[u8], from: usize, sig: &Signature) -> Option<usize> {
    search_by(buffer, from, sig.elements(), element_matches)
}

/// Counts every position where `sig` matches. After a hit the search resumes
/// one byte past the start of that hit, so overlapping occurrences count.
pub fn count(buffer: &[u8], sig: &Signature) -> usize {
    let mut count = 0;
    let mut start = 0;

    while let Some(found) = find_next(buffer, start, sig) {
        count += 1;
        start = found + 1;
    }

    count
}

pub fn matches<'a>(buffer: &'a [u8], sig: &'a Signature) -> Matches<'a> {
    Matches {
        buffer,
        sig,
        next: 0,
    }
}

/// Iterator over the start offsets of every (possibly overlapping) match.
pub struct Matches<'a> {
    buffer: &'a [u8],
    sig: &'a Signature,
    next: usize,
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let found = find_next(self.buffer, self.next, self.sig)?;
        self.next = found + 1;
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{compile, Encoding};

    fn hex(text: &str) -> Signature {
        compile(Encoding::HexPattern, text).unwrap()
    }

    #[test]
    fn test_exact_sequence_found_once() {
        let sig = hex("DE AD BE EF");
        let buffer = [0x00, 0xDE, 0xAD, 0xBE, 0xEF, 0x00];
        assert_eq!(count(&buffer, &sig), 1);
        assert_eq!(find_next(&buffer, 0, &sig), Some(1));
    }

    #[test]
    fn test_wildcard_matches_every_byte() {
        let sig = hex("41 ? 43");
        for x in 0..=u8::MAX {
            assert_eq!(count(&[0x41, x, 0x43], &sig), 1, "middle byte {:#04x}", x);
        }
        assert_eq!(count(&[0x41, 0xFF, 0x44], &sig), 0);
    }

    #[test]
    fn test_overlapping_matches_counted() {
        assert_eq!(count(&[0x41, 0x41, 0x41], &hex("41 41")), 2);
        assert_eq!(count(&[0x41; 6], &hex("41 41 41")), 4);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(count(&[0x00, 0x02, 0x01, 0x00], &hex("00 01")), 0);
        assert_eq!(count(&[], &hex("00")), 0);
    }

    #[test]
    fn test_signature_longer_than_buffer() {
        assert_eq!(count(&[0x41, 0x42], &hex("41 42 43")), 0);
    }

    #[test]
    fn test_match_at_buffer_end() {
        assert_eq!(count(&[0x00, 0x00, 0x41, 0x42], &hex("41 42")), 1);
        assert_eq!(find_next(&[0x00, 0x41], 1, &hex("41")), Some(1));
        assert_eq!(find_next(&[0x00, 0x41], 2, &hex("41")), None);
    }

    #[test]
    fn test_all_wildcard_counts_every_position() {
        let sig = hex("? ?");
        assert_eq!(count(&[1, 2, 3, 4, 5], &sig), 4);
    }

    #[test]
    fn test_matches_iterator_offsets() {
        let buffer = [0x41, 0x41, 0x00, 0x41, 0x41];
        let sig = hex("41 ?");
        let offsets: Vec<_> = matches(&buffer, &sig).collect();
        assert_eq!(offsets, vec![0, 1, 3]);
        assert_eq!(offsets.len(), count(&buffer, &sig));
    }

    #[test]
    fn test_search_by_custom_predicate() {
        let haystack = [1, 2, 3, 4, 5];
        let found = search_by(&haystack, 0, &[3, 4], |a, b| a == b);
        assert_eq!(found, Some(2));
        assert_eq!(search_by(&haystack, 3, &[3, 4], |a, b| a == b), None);
        assert_eq!(search_by::<i32, i32, _>(&haystack, 0, &[], |a, b| a == b), None);
    }
}
