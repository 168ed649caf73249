use serde::Serialize;

use crate::errors::ClientError;

/// Backend booking rules. In an update, absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_show_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_advance_hours: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_booking_duration_days: Option<u32>,
}

impl BookingRules {
    pub fn from_form(threshold: &str, advance_hours: &str, max_days: &str) -> Result<Self, ClientError> {
        Ok(Self {
            no_show_threshold: parse_field("noShowThreshold", threshold)?,
            booking_advance_hours: parse_field("bookingAdvanceHours", advance_hours)?,
            max_booking_duration_days: parse_field("maxBookingDurationDays", max_days)?,
        })
    }
}

fn parse_field(field: &'static str, raw: &str) -> Result<Option<u32>, ClientError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| ClientError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_omitted() {
        let rules = BookingRules::from_form(" 5 ", "", "  ").unwrap();
        assert_eq!(rules.no_show_threshold, Some(5));
        assert_eq!(
            serde_json::to_value(&rules).unwrap(),
            serde_json::json!({ "noShowThreshold": 5 })
        );
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = BookingRules::from_form("1", "soon", "3").unwrap_err();
        assert_eq!(err.to_string(), "invalid bookingAdvanceHours: soon");
    }

    #[test]
    fn test_rejects_negative() {
        assert!(BookingRules::from_form("-1", "", "").is_err());
    }
}
