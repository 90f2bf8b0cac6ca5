//! # Record Codec
//!
//! Encode/decode of one staged-line record. The encoding contract is
//! byte-exact: `size|quantity|ingredient1,ingredient2,...` — an empty
//! ingredient list encodes as an empty third segment and decodes back to
//! an empty sequence.

use forno_core::types::StagedLine;

/// Encodes one staged line as a buffer record (without the trailing newline).
///
/// ## Example
/// ```rust
/// use forno_cart::codec::encode;
/// use forno_core::types::StagedLine;
///
/// let line = StagedLine::new("medium", 2, vec!["cheese".into(), "olives".into()]);
/// assert_eq!(encode(&line), "medium|2|cheese,olives");
///
/// let plain = StagedLine::new("small", 1, vec![]);
/// assert_eq!(encode(&plain), "small|1|");
/// ```
pub fn encode(line: &StagedLine) -> String {
    format!(
        "{}|{}|{}",
        line.size,
        line.quantity,
        line.ingredients.join(",")
    )
}

/// Decodes one buffer record, `None` if the record is malformed.
///
/// ## Malformed Records
/// A record with fewer than three `|`-separated segments, or a quantity
/// segment that does not parse as an integer, decodes to `None` and is
/// skipped by the loader. Segments beyond the third are ignored, matching
/// the legacy reader.
pub fn decode(raw: &str) -> Option<StagedLine> {
    let segments: Vec<&str> = raw.split('|').collect();
    if segments.len() < 3 {
        return None;
    }

    let quantity: i64 = segments[1].trim().parse().ok()?;

    let ingredients = if segments[2].is_empty() {
        Vec::new()
    } else {
        segments[2].split(',').map(str::to_string).collect()
    };

    Some(StagedLine {
        size: segments[0].to_string(),
        quantity,
        ingredients,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_byte_exact() {
        let line = StagedLine::new(
            "medium",
            2,
            vec!["cheese".to_string(), "olives".to_string()],
        );
        assert_eq!(encode(&line), "medium|2|cheese,olives");
    }

    #[test]
    fn test_empty_ingredients_encode_as_empty_segment() {
        let line = StagedLine::new("small", 1, vec![]);
        assert_eq!(encode(&line), "small|1|");

        let decoded = decode("small|1|").unwrap();
        assert!(decoded.ingredients.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let lines = vec![
            StagedLine::new("small", 1, vec![]),
            StagedLine::new("medium", 2, vec!["cheese".to_string(), "olives".to_string()]),
            StagedLine::new("large", 3, vec!["ham".to_string(), "ham".to_string()]),
        ];

        for line in lines {
            let decoded = decode(&encode(&line)).unwrap();
            assert_eq!(decoded, line);
        }
    }

    #[test]
    fn test_malformed_records_decode_to_none() {
        assert!(decode("").is_none());
        assert!(decode("medium").is_none());
        assert!(decode("medium|2").is_none());
        // Non-integer quantity is malformed
        assert!(decode("medium|two|cheese").is_none());
    }

    #[test]
    fn test_extra_segments_are_ignored() {
        let decoded = decode("medium|2|cheese|leftover|junk").unwrap();
        assert_eq!(decoded.size, "medium");
        assert_eq!(decoded.quantity, 2);
        assert_eq!(decoded.ingredients, vec!["cheese".to_string()]);
    }

    #[test]
    fn test_negative_quantity_loads() {
        // Negative quantities parse and load; the ledger rejects them at
        // commit with a CHECK constraint.
        let decoded = decode("medium|-1|").unwrap();
        assert_eq!(decoded.quantity, -1);
    }
}
