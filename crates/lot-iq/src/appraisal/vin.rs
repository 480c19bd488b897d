use serde::{Deserialize, Serialize};

use super::domain::VehicleInput;

/// Fields a VIN decode can prefill on the appraisal form. Values stay
/// strings because they land directly in form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedVin {
    pub make: String,
    pub model: String,
    pub year: String,
    pub trim: String,
    pub engine: String,
    pub transmission: String,
    pub fuel_type: String,
    pub drive_type: String,
    pub body_class: String,
}

impl DecodedVin {
    /// Fills blank submission fields from the decode without clobbering
    /// anything the appraiser already typed.
    pub fn apply_to(&self, input: &mut VehicleInput) {
        fill_if_blank(&mut input.make, &self.make);
        fill_if_blank(&mut input.model, &self.model);
        fill_if_blank(&mut input.year, &self.year);
        fill_if_blank(&mut input.trim, &self.trim);
        fill_if_blank(&mut input.engine, &self.engine);
        fill_if_blank(&mut input.transmission, &self.transmission);
        fill_if_blank(&mut input.body_type, &self.body_class);
    }
}

fn fill_if_blank(target: &mut String, value: &str) {
    if target.trim().is_empty() && !value.trim().is_empty() {
        *target = value.trim().to_string();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VinDecodeError {
    #[error("vin must be 17 characters, got {0}")]
    InvalidLength(usize),
    #[error("vin contains invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("vin {0} not found")]
    NotFound(String),
    #[error("decoder unavailable: {0}")]
    Unavailable(String),
}

/// Lookup contract for the external VIN decode provider.
pub trait VinDecoder: Send + Sync {
    fn decode(&self, vin: &str) -> Result<DecodedVin, VinDecodeError>;
}

/// Uppercases and validates a raw VIN. Modern VINs are 17 characters and
/// never contain I, O, or Q.
pub fn normalize_vin(raw: &str) -> Result<String, VinDecodeError> {
    let normalized = raw.trim().to_ascii_uppercase();
    if normalized.chars().count() != 17 {
        return Err(VinDecodeError::InvalidLength(normalized.chars().count()));
    }
    for c in normalized.chars() {
        if !c.is_ascii_alphanumeric() || matches!(c, 'I' | 'O' | 'Q') {
            return Err(VinDecodeError::InvalidCharacter(c));
        }
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        let vin = normalize_vin("  4t1bf1fk5cu123456 ").expect("valid vin");
        assert_eq!(vin, "4T1BF1FK5CU123456");
    }

    #[test]
    fn rejects_short_vins() {
        match normalize_vin("ABC123") {
            Err(VinDecodeError::InvalidLength(6)) => {}
            other => panic!("expected InvalidLength, got {other:?}"),
        }
    }

    #[test]
    fn rejects_forbidden_characters() {
        match normalize_vin("4T1BF1FK5CU12345O") {
            Err(VinDecodeError::InvalidCharacter('O')) => {}
            other => panic!("expected InvalidCharacter, got {other:?}"),
        }
    }

    #[test]
    fn decode_fills_only_blank_fields() {
        let decoded = DecodedVin {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2012".to_string(),
            body_class: "Sedan".to_string(),
            ..DecodedVin::default()
        };
        let mut input = VehicleInput {
            make: "Lexus".to_string(),
            ..VehicleInput::default()
        };
        decoded.apply_to(&mut input);
        assert_eq!(input.make, "Lexus");
        assert_eq!(input.model, "Camry");
        assert_eq!(input.year, "2012");
        assert_eq!(input.body_type, "Sedan");
    }
}
