use serde_json::Value;

use crate::models::User;
use crate::services::api::ApiReply;

/// Two-space indented JSON, keys in backend order. Floats without a
/// fractional part print as integers (`24.0` becomes `24`).
pub fn pretty_json(value: &Value) -> String {
    let value = integral_floats(value);
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

fn integral_floats(value: &Value) -> Value {
    match value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                Value::from(f as i64)
            }
            _ => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(integral_floats).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), integral_floats(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

pub fn user_line(user: &User) -> String {
    let name = match &user.name {
        Some(Some(name)) => name.as_str(),
        Some(None) => "null",
        None => "undefined",
    };
    format!(
        "{} — {} — no_shows: {} — restricted: {}",
        name,
        user.phone,
        user.no_show_count,
        user.restricted
    )
}

pub fn user_lines(users: &[User]) -> Vec<String> {
    users.iter().map(user_line).collect()
}

/// `<prefix>: <body>` on 2xx, `Error (<status>): <body>` otherwise.
pub fn reply_text(success_prefix: &str, reply: &ApiReply) -> String {
    let body = pretty_json(&reply.body);
    if reply.is_success() {
        format!("{success_prefix}: {body}")
    } else {
        format!("Error ({}): {body}", reply.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(name: Option<&str>, phone: &str, no_shows: u32, restricted: bool) -> User {
        User {
            id: None,
            name: Some(name.map(str::to_string)),
            phone: phone.to_string(),
            no_show_count: no_shows,
            restricted,
        }
    }

    #[test]
    fn test_user_line() {
        let line = user_line(&user(Some("Alice"), "+15550000001", 2, false));
        assert_eq!(line, "Alice — +15550000001 — no_shows: 2 — restricted: false");
    }

    #[test]
    fn test_user_line_null_name() {
        let line = user_line(&user(None, "+1", 9, true));
        assert_eq!(line, "null — +1 — no_shows: 9 — restricted: true");
    }

    #[test]
    fn test_user_line_missing_name() {
        let user: User =
            serde_json::from_str(r#"{"phone":"+1","no_show_count":0,"restricted":false}"#).unwrap();
        assert_eq!(user_line(&user), "undefined — +1 — no_shows: 0 — restricted: false");

        let user: User =
            serde_json::from_str(r#"{"name":null,"phone":"+1","no_show_count":0,"restricted":false}"#)
                .unwrap();
        assert_eq!(user_line(&user), "null — +1 — no_shows: 0 — restricted: false");
    }

    #[test]
    fn test_user_lines_keep_order() {
        let users = vec![user(Some("Zed"), "1", 0, false), user(Some("Amy"), "2", 0, false)];
        let lines = user_lines(&users);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Zed"));
        assert!(lines[1].starts_with("Amy"));
    }

    #[test]
    fn test_created_reply() {
        let reply = ApiReply { status: 201, body: json!({"id": 1}) };
        assert_eq!(reply_text("Created", &reply), "Created: {\n  \"id\": 1\n}");
    }

    #[test]
    fn test_error_reply() {
        let reply = ApiReply { status: 409, body: json!({"error": "conflict"}) };
        assert_eq!(
            reply_text("Created", &reply),
            "Error (409): {\n  \"error\": \"conflict\"\n}"
        );
    }

    #[test]
    fn test_pretty_json_keeps_key_order() {
        let value: Value = serde_json::from_str(r#"{"z":1,"a":[true]}"#).unwrap();
        assert_eq!(pretty_json(&value), "{\n  \"z\": 1,\n  \"a\": [\n    true\n  ]\n}");
    }

    #[test]
    fn test_pretty_json_prints_whole_floats_as_integers() {
        let value: Value =
            serde_json::from_str(r#"{"hours":24.0,"big":1e2,"ratio":0.5,"neg":-3.0,"n":[7]}"#).unwrap();
        assert_eq!(
            pretty_json(&value),
            "{\n  \"hours\": 24,\n  \"big\": 100,\n  \"ratio\": 0.5,\n  \"neg\": -3,\n  \"n\": [\n    7\n  ]\n}"
        );
    }
}
