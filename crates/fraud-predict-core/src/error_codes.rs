//! Transaction error code catalogue.
//!
//! Numeric `error` values submitted by the transaction entry form, with the
//! card-network error combination each one stands for. Informational only;
//! the decision rule reads the number, never the label.

use serde::Serialize;

/// One catalogue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorCode {
    pub code: u8,
    pub label: &'static str,
}

const fn entry(code: u8, label: &'static str) -> ErrorCode {
    ErrorCode { code, label }
}

/// All known codes, ordered by code
pub const ERROR_CODES: [ErrorCode; 23] = [
    entry(1, "Bad CVV"),
    entry(2, "Bad CVV, Insufficient Balance"),
    entry(3, "Bad CVV, Technical Glitch"),
    entry(4, "Bad Card Number"),
    entry(5, "Bad Card Number, Bad CVV"),
    entry(6, "Bad Card Number, Bad Expiration"),
    entry(7, "Bad Card Number, Bad Expiration, Insufficient Balance"),
    entry(8, "Bad Card Number, Bad Expiration, Technical Glitch"),
    entry(9, "Bad Card Number, Insufficient Balance"),
    entry(10, "Bad Card Number, Technical Glitch"),
    entry(11, "Bad Expiration"),
    entry(12, "Bad Expiration, Bad CVV"),
    entry(13, "Bad Expiration, Insufficient Balance"),
    entry(14, "Bad Expiration, Technical Glitch"),
    entry(15, "Bad PIN"),
    entry(16, "Bad PIN, Insufficient Balance"),
    entry(17, "Bad PIN, Technical Glitch"),
    entry(18, "Bad Zipcode"),
    entry(19, "Bad Zipcode, Insufficient Balance"),
    entry(20, "Bad Zipcode, Technical Glitch"),
    entry(21, "Insufficient Balance"),
    entry(22, "Insufficient Balance, Technical Glitch"),
    entry(23, "Technical Glitch"),
];

/// Look up a code's label
pub fn lookup(code: u8) -> Option<&'static ErrorCode> {
    ERROR_CODES.iter().find(|e| e.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_contiguous() {
        for (i, e) in ERROR_CODES.iter().enumerate() {
            assert_eq!(e.code as usize, i + 1);
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(15).map(|e| e.label), Some("Bad PIN"));
        assert_eq!(lookup(23).map(|e| e.label), Some("Technical Glitch"));
        assert!(lookup(0).is_none());
        assert!(lookup(24).is_none());
    }
}
