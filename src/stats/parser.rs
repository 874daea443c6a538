//! Parser for the comma-separated stats payload

use crate::common::errors::{MonitorError, Result};
use crate::common::types::{StatsSample, FIELD_COUNT};

/// Parse a raw payload into a [`StatsSample`].
///
/// Surrounding whitespace is ignored; the fields themselves must be bare
/// decimal numbers.
pub fn parse_stats(raw: &str) -> Result<StatsSample> {
    let fields: Vec<&str> = raw.trim().split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(MonitorError::Format {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    }

    let mut values = [0.0; FIELD_COUNT];
    for (index, (slot, field)) in values.iter_mut().zip(&fields).enumerate() {
        let invalid = || MonitorError::Numeric {
            index,
            value: field.to_string(),
        };
        // f64 parsing also accepts inf and NaN, which are not readings
        let value = field.parse::<f64>().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        *slot = value;
    }

    Ok(StatsSample::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let sample = parse_stats("1.5,2,3,4,5,6,7").unwrap();
        assert_eq!(sample.as_array(), &[1.5, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let sample = parse_stats("  \n31,100,50,100,95,100,95\n").unwrap();
        assert_eq!(sample.load_average(), 31.0);
        assert_eq!(sample.used_network(), 95.0);
    }

    #[test]
    fn test_parse_preserves_precision() {
        let sample = parse_stats("0.1,17179869184,8589934592.5,1e12,2.5e11,125000000,0").unwrap();
        assert_eq!(sample.load_average(), 0.1);
        assert_eq!(sample.total_memory(), 17179869184.0);
        assert_eq!(sample.used_memory(), 8589934592.5);
        assert_eq!(sample.total_disk(), 1e12);
        assert_eq!(sample.used_disk(), 2.5e11);
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            parse_stats("1,2,3"),
            Err(MonitorError::Format {
                expected: 7,
                found: 3
            })
        ));
        assert!(matches!(
            parse_stats("1,2,3,4,5,6,7,8"),
            Err(MonitorError::Format { found: 8, .. })
        ));
        assert!(matches!(
            parse_stats("1,2,3,4,5,6,7,"),
            Err(MonitorError::Format { found: 8, .. })
        ));
    }

    #[test]
    fn test_empty_payload_is_format_error() {
        assert!(matches!(
            parse_stats("   "),
            Err(MonitorError::Format { found: 1, .. })
        ));
    }

    #[test]
    fn test_non_numeric_field() {
        match parse_stats("1,2,x,4,5,6,7") {
            Err(MonitorError::Numeric { index, value }) => {
                assert_eq!(index, 2);
                assert_eq!(value, "x");
            }
            other => panic!("expected numeric error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_fields_are_numeric_errors() {
        assert!(matches!(
            parse_stats("inf,100,50,100,5,100,5"),
            Err(MonitorError::Numeric { index: 0, .. })
        ));
        assert!(matches!(
            parse_stats("10,100,50,100,5,-infinity,5"),
            Err(MonitorError::Numeric { index: 5, .. })
        ));
        match parse_stats("NaN,100,50,100,5,100,5") {
            Err(MonitorError::Numeric { index, value }) => {
                assert_eq!(index, 0);
                assert_eq!(value, "NaN");
            }
            other => panic!("expected numeric error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_field_is_numeric_error() {
        assert!(matches!(
            parse_stats("1,2,,4,5,6,7"),
            Err(MonitorError::Numeric { index: 2, .. })
        ));
    }

    #[test]
    fn test_inner_whitespace_is_numeric_error() {
        assert!(matches!(
            parse_stats("1, 2,3,4,5,6,7"),
            Err(MonitorError::Numeric { index: 1, .. })
        ));
    }
}
