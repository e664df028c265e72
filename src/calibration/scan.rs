// Fixed-format scanner for the calibration file
//
// The file is one object-like line:
//
//   { "instability": <f64> , "saturation": <f64> , "resistance": <f64> , "epoch": <u64> }
//
// ASCII whitespace is skipped before every literal chunk and every
// number, literal chunks must match exactly, and the scan stops at the
// first mismatch. Numbers are decimal/exponential literals only; word
// forms like inf or nan are mismatches. Fields are assigned into the
// record as soon as they parse, so a truncated or malformed file updates
// a prefix of the fields and leaves the rest alone. Anything after the
// last matched token, including the closing brace, is ignored - the
// input is treated as raw bytes, so trailing content need not even be
// valid UTF-8.

use crate::calibration::CalibrationState;

/// Field positions of the fixed template, in scan order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Instability,
    Saturation,
    Resistance,
    Epoch,
}

const FIELD_ORDER: [Field; 4] = [
    Field::Instability,
    Field::Saturation,
    Field::Resistance,
    Field::Epoch,
];

impl Field {
    /// Literal key chunk preceding this field's value
    fn key(self) -> &'static str {
        match self {
            Field::Instability => "\"instability\":",
            Field::Saturation => "\"saturation\":",
            Field::Resistance => "\"resistance\":",
            Field::Epoch => "\"epoch\":",
        }
    }
}

/// Outcome of one scan pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of fields assigned before the scan stopped (0..=4)
    pub fields_applied: usize,
}

impl ScanReport {
    /// True when every field in the template was matched and assigned
    pub fn is_complete(&self) -> bool {
        self.fields_applied == FIELD_ORDER.len()
    }
}

/// Scan `input` against the fixed template, assigning matched fields
/// into `state` in order and stopping at the first mismatch.
///
/// Fields already assigned when the scan stops keep their new values;
/// the rest of the record is untouched.
pub fn scan_into(input: &[u8], state: &mut CalibrationState) -> ScanReport {
    let mut cursor = Cursor::new(input);
    let mut applied = 0;

    if !cursor.expect_literal("{") {
        return ScanReport { fields_applied: 0 };
    }

    for (index, field) in FIELD_ORDER.iter().enumerate() {
        if index > 0 && !cursor.expect_literal(",") {
            break;
        }
        if !cursor.expect_literal(field.key()) {
            break;
        }

        let matched = match field {
            Field::Instability => cursor.scan_f64().map(|v| state.instability = v).is_some(),
            Field::Saturation => cursor.scan_f64().map(|v| state.saturation = v).is_some(),
            Field::Resistance => cursor.scan_f64().map(|v| state.resistance = v).is_some(),
            Field::Epoch => cursor.scan_u64().map(|v| state.epoch = v).is_some(),
        };
        if !matched {
            break;
        }
        applied += 1;
    }

    ScanReport {
        fields_applied: applied,
    }
}

/// Byte cursor over the input with leading-whitespace skipping
struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.input.len() && self.input[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Match a literal chunk exactly, after skipping leading whitespace
    fn expect_literal(&mut self, literal: &str) -> bool {
        self.skip_whitespace();
        let bytes = literal.as_bytes();
        if self.input[self.pos..].starts_with(bytes) {
            self.pos += bytes.len();
            true
        } else {
            false
        }
    }

    /// Longest-prefix decimal float scan: optional sign, digits with
    /// optional fraction, exponent only if at least one digit follows
    /// the marker. Word forms (inf, nan) are rejected. The cursor does
    /// not advance on failure.
    fn scan_f64(&mut self) -> Option<f64> {
        self.skip_whitespace();
        let bytes = self.input;
        let start = self.pos;
        let mut end = self.pos;

        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let int_digits = digit_run(bytes, &mut end);
        let mut frac_digits = 0;
        if end < bytes.len() && bytes[end] == b'.' {
            end += 1;
            frac_digits = digit_run(bytes, &mut end);
        }
        if int_digits == 0 && frac_digits == 0 {
            return None;
        }
        if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
            let mut exp_end = end + 1;
            if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
                exp_end += 1;
            }
            if digit_run(bytes, &mut exp_end) > 0 {
                end = exp_end;
            }
        }

        // Consumed bytes are all ASCII, so the slice is valid UTF-8
        let text = std::str::from_utf8(&bytes[start..end]).ok()?;
        match text.parse::<f64>() {
            Ok(value) => {
                self.pos = end;
                Some(value)
            }
            Err(_) => None,
        }
    }

    /// Unsigned decimal scan; no sign accepted, overflow fails the scan
    fn scan_u64(&mut self) -> Option<u64> {
        self.skip_whitespace();
        let start = self.pos;
        let mut end = self.pos;
        if digit_run(self.input, &mut end) == 0 {
            return None;
        }

        let text = std::str::from_utf8(&self.input[start..end]).ok()?;
        match text.parse::<u64>() {
            Ok(value) => {
                self.pos = end;
                Some(value)
            }
            Err(_) => None,
        }
    }
}

/// Advance past a run of ASCII digits, returning how many were consumed
fn digit_run(bytes: &[u8], pos: &mut usize) -> usize {
    let start = *pos;
    while *pos < bytes.len() && bytes[*pos].is_ascii_digit() {
        *pos += 1;
    }
    *pos - start
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str =
        r#"{ "instability": 1.5 , "saturation": 2.25 , "resistance": -0.75 , "epoch": 42 }"#;

    /// Non-zero starting record to catch fields being clobbered
    fn prior_state() -> CalibrationState {
        CalibrationState {
            instability: 10.0,
            saturation: 20.0,
            resistance: 30.0,
            epoch: 40,
        }
    }

    #[test]
    fn test_scan_well_formed() {
        let mut state = CalibrationState::new();
        let report = scan_into(WELL_FORMED.as_bytes(), &mut state);

        assert!(report.is_complete());
        assert_eq!(report.fields_applied, 4);
        assert_eq!(state.instability, 1.5);
        assert_eq!(state.saturation, 2.25);
        assert_eq!(state.resistance, -0.75);
        assert_eq!(state.epoch, 42);
    }

    #[test]
    fn test_scan_minimal_whitespace() {
        let input = r#"{"instability":1.0,"saturation":2.0,"resistance":3.0,"epoch":4}"#;
        let mut state = CalibrationState::new();
        let report = scan_into(input.as_bytes(), &mut state);

        assert!(report.is_complete());
        assert_eq!(state.instability, 1.0);
        assert_eq!(state.epoch, 4);
    }

    #[test]
    fn test_scan_generous_whitespace() {
        let input = "  {\n\t\"instability\":\t1.0 ,\n \"saturation\":  2.0\t,\n \"resistance\": 3.0 , \"epoch\":\n4\n}\n";
        let mut state = CalibrationState::new();
        let report = scan_into(input.as_bytes(), &mut state);

        assert!(report.is_complete());
        assert_eq!(state.saturation, 2.0);
        assert_eq!(state.epoch, 4);
    }

    #[test]
    fn test_scan_whitespace_inside_key_rejected() {
        // The key and its colon are one literal chunk; a space between
        // them is a mismatch, not tolerated whitespace.
        let input = r#"{ "instability" : 1.0 ,"#;
        let mut state = prior_state();
        let report = scan_into(input.as_bytes(), &mut state);

        assert_eq!(report.fields_applied, 0);
        assert_eq!(state, prior_state());
    }

    #[test]
    fn test_scan_exponent_forms() {
        let input =
            r#"{ "instability": 2.5e-3 , "saturation": +1E2 , "resistance": .5 , "epoch": 0 }"#;
        let mut state = CalibrationState::new();
        let report = scan_into(input.as_bytes(), &mut state);

        assert!(report.is_complete());
        assert_eq!(state.instability, 2.5e-3);
        assert_eq!(state.saturation, 100.0);
        assert_eq!(state.resistance, 0.5);
    }

    #[test]
    fn test_scan_truncated_after_first_field() {
        let mut state = prior_state();
        let report = scan_into(br#"{ "instability": 3.0 ,"#, &mut state);

        assert_eq!(report.fields_applied, 1);
        assert!(!report.is_complete());
        assert_eq!(state.instability, 3.0);
        assert_eq!(state.saturation, 20.0);
        assert_eq!(state.resistance, 30.0);
        assert_eq!(state.epoch, 40);
    }

    #[test]
    fn test_scan_wrong_key_stops() {
        let input = r#"{ "instability": 1.0 , "saturations": 2.0 , "resistance": 3.0 }"#;
        let mut state = prior_state();
        let report = scan_into(input.as_bytes(), &mut state);

        // Later fields are not picked up out of order
        assert_eq!(report.fields_applied, 1);
        assert_eq!(state.instability, 1.0);
        assert_eq!(state.resistance, 30.0);
    }

    #[test]
    fn test_scan_empty_input() {
        let mut state = prior_state();
        let report = scan_into(b"", &mut state);

        assert_eq!(report.fields_applied, 0);
        assert_eq!(state, prior_state());
    }

    #[test]
    fn test_scan_missing_open_brace() {
        let mut state = prior_state();
        let report = scan_into(br#""instability": 1.0"#, &mut state);

        assert_eq!(report.fields_applied, 0);
        assert_eq!(state, prior_state());
    }

    #[test]
    fn test_scan_bad_value_stops_before_assignment() {
        let input = r#"{ "instability": fast , "saturation": 2.0 }"#;
        let mut state = prior_state();
        let report = scan_into(input.as_bytes(), &mut state);

        assert_eq!(report.fields_applied, 0);
        assert_eq!(state, prior_state());
    }

    #[test]
    fn test_scan_epoch_rejects_sign() {
        let input =
            r#"{ "instability": 1.0 , "saturation": 2.0 , "resistance": 3.0 , "epoch": -5 }"#;
        let mut state = prior_state();
        let report = scan_into(input.as_bytes(), &mut state);

        assert_eq!(report.fields_applied, 3);
        assert_eq!(state.resistance, 3.0);
        assert_eq!(state.epoch, 40);
    }

    #[test]
    fn test_scan_epoch_overflow_stops() {
        let input = r#"{ "instability": 1.0 , "saturation": 2.0 , "resistance": 3.0 , "epoch": 99999999999999999999999 }"#;
        let mut state = prior_state();
        let report = scan_into(input.as_bytes(), &mut state);

        assert_eq!(report.fields_applied, 3);
        assert_eq!(state.epoch, 40);
    }

    #[test]
    fn test_scan_trailing_content_ignored() {
        let with_garbage = format!("{WELL_FORMED} trailing notes, ignored entirely");
        let mut state = CalibrationState::new();
        let report = scan_into(with_garbage.as_bytes(), &mut state);

        assert!(report.is_complete());
        assert_eq!(state.epoch, 42);
    }

    #[test]
    fn test_scan_non_utf8_trailing_bytes_ignored() {
        let mut input = WELL_FORMED.as_bytes().to_vec();
        input.extend_from_slice(&[0xFF, 0xFE, 0x80]);
        let mut state = CalibrationState::new();
        let report = scan_into(&input, &mut state);

        assert!(report.is_complete());
        assert_eq!(state.instability, 1.5);
        assert_eq!(state.epoch, 42);
    }

    #[test]
    fn test_scan_rejects_inf_and_nan_words() {
        // Only decimal/exponential literals match; word forms stop the
        // scan at the value position without assigning it.
        let input = r#"{ "instability": inf , "saturation": 2.0 }"#;
        let mut state = prior_state();
        let report = scan_into(input.as_bytes(), &mut state);

        assert_eq!(report.fields_applied, 0);
        assert_eq!(state, prior_state());

        let input = r#"{ "instability": 1.0 , "saturation": nan ,"#;
        let mut state = prior_state();
        let report = scan_into(input.as_bytes(), &mut state);

        assert_eq!(report.fields_applied, 1);
        assert_eq!(state.instability, 1.0);
        assert_eq!(state.saturation, 20.0);
    }

    #[test]
    fn test_scan_missing_close_brace_still_complete() {
        let input =
            r#"{ "instability": 1.5 , "saturation": 2.25 , "resistance": -0.75 , "epoch": 42"#;
        let mut state = CalibrationState::new();
        let report = scan_into(input.as_bytes(), &mut state);

        assert!(report.is_complete());
        assert_eq!(state.epoch, 42);
    }

    #[test]
    fn test_scan_dangling_exponent_marker() {
        // "3.0e" with no exponent digits parses as 3.0; the scan then
        // stops because 'e' is not the expected comma.
        let input = r#"{ "instability": 3.0e , "saturation": 2.0 }"#;
        let mut state = prior_state();
        let report = scan_into(input.as_bytes(), &mut state);

        assert_eq!(report.fields_applied, 1);
        assert_eq!(state.instability, 3.0);
        assert_eq!(state.saturation, 20.0);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let mut state = CalibrationState::new();
        scan_into(WELL_FORMED.as_bytes(), &mut state);
        let first = state;
        scan_into(WELL_FORMED.as_bytes(), &mut state);

        assert_eq!(state, first);
    }
}
