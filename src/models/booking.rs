use serde::Serialize;

/// Body of `POST /api/bookings`, built from the booking form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingRequest {
    pub organizer_phone: String,
    pub participants_phones: Vec<String>,
    pub start_ts: String,
    pub end_ts: String,
    pub note: String,
}

impl BookingRequest {
    /// Trims every field and splits the comma separated participant list.
    pub fn from_form(organizer: &str, participants: &str, start: &str, end: &str, note: &str) -> Self {
        Self {
            organizer_phone: organizer.trim().to_string(),
            participants_phones: split_participants(participants),
            start_ts: start.trim().to_string(),
            end_ts: end.trim().to_string(),
            note: note.trim().to_string(),
        }
    }
}

pub fn split_participants(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_participants_drops_blanks() {
        assert_eq!(split_participants("a, ,b,"), vec!["a", "b"]);
        assert!(split_participants("").is_empty());
        assert!(split_participants(" , ,").is_empty());
    }

    #[test]
    fn test_split_participants_is_idempotent() {
        let once = split_participants(" +1555 , +1666,, +1777 ");
        let twice = split_participants(&once.join(","));
        assert_eq!(once, twice);
        assert_eq!(once, vec!["+1555", "+1666", "+1777"]);
    }

    #[test]
    fn test_from_form_trims_fields() {
        let req = BookingRequest::from_form(
            "  +15550000001 ",
            "+15550000002, +15550000003",
            " 2030-01-01T10:00:00Z",
            "2030-01-01T11:00:00Z ",
            "  ",
        );
        assert_eq!(req.organizer_phone, "+15550000001");
        assert_eq!(req.participants_phones, vec!["+15550000002", "+15550000003"]);
        assert_eq!(req.start_ts, "2030-01-01T10:00:00Z");
        assert_eq!(req.end_ts, "2030-01-01T11:00:00Z");
        assert_eq!(req.note, "");
    }

    #[test]
    fn test_serializes_wire_field_names() {
        let req = BookingRequest::from_form("1", "", "s", "e", "n");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "organizer_phone": "1",
                "participants_phones": [],
                "start_ts": "s",
                "end_ts": "e",
                "note": "n",
            })
        );
    }
}
