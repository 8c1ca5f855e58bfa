//! Character classes for pronounceable generated names.

/// Consonants drawn at consonant positions.
pub const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// Vowels drawn at vowel positions.
pub const VOWELS: &[u8] = b"aeiou";

/// Digits drawn at the final position of each cycle.
pub const DIGITS: &[u8] = b"0123456789";

/// Longest name most filesystems accept for a single path component.
pub const MAX_NAME_BYTES: usize = 255;

/// Character class for each position, repeated cyclically.
pub const NAME_PATTERN: [&[u8]; 8] = [
    CONSONANTS, VOWELS, CONSONANTS, VOWELS, CONSONANTS, VOWELS, CONSONANTS, DIGITS,
];

/// Character class used at position `index` of a name.
pub fn class_at(index: usize) -> &'static [u8] {
    NAME_PATTERN[index % NAME_PATTERN.len()]
}

/// Number of distinct names with lengths in `[min_len, max_len)`.
///
/// An empty range counts names of exactly `min_len`. Saturates at `u128::MAX`.
pub fn name_capacity(min_len: usize, max_len: usize) -> u128 {
    let last = if max_len > min_len { max_len - 1 } else { min_len };

    let mut per_length = names_of_length(min_len);
    let mut total = per_length;
    for len in min_len..last {
        if total == u128::MAX {
            break;
        }
        per_length = per_length.saturating_mul(class_at(len).len() as u128);
        total = total.saturating_add(per_length);
    }
    total
}

fn names_of_length(len: usize) -> u128 {
    let mut count = 1u128;
    for i in 0..len {
        if count == u128::MAX {
            break;
        }
        count = count.saturating_mul(class_at(i).len() as u128);
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_cycles() {
        assert_eq!(class_at(0), CONSONANTS);
        assert_eq!(class_at(1), VOWELS);
        assert_eq!(class_at(7), DIGITS);
        assert_eq!(class_at(8), CONSONANTS);
    }

    #[test]
    fn test_name_capacity() {
        assert_eq!(name_capacity(1, 1), 21);
        assert_eq!(name_capacity(1, 2), 21);
        assert_eq!(name_capacity(1, 3), 21 + 21 * 5);
        assert_eq!(name_capacity(2, 2), 21 * 5);
    }

    #[test]
    fn test_name_capacity_saturates() {
        assert_eq!(name_capacity(1, 500), u128::MAX);
        assert_eq!(name_capacity(4, 1_000_000), u128::MAX);
        assert_eq!(name_capacity(usize::MAX, usize::MAX), u128::MAX);
        assert_eq!(name_capacity(usize::MAX - 1, usize::MAX), u128::MAX);
    }

    #[test]
    fn test_name_capacity_matches_product() {
        // 21 * 5 * 21 * 5 * 21 * 5 * 21 * 10 for one full cycle
        let cycle = 21u128.pow(4) * 5u128.pow(3) * 10;
        assert_eq!(name_capacity(8, 8), cycle);
        assert_eq!(name_capacity(8, 10), cycle + cycle * 21);
    }
}
