use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{json, Value};

use crate::errors::ClientError;
use crate::models::{BookingRequest, BookingRules, User};
use crate::services::http::{HttpPort, HttpResponse};

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A decoded backend reply whose status decides how it is displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: Value,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl TryFrom<HttpResponse> for ApiReply {
    type Error = ClientError;

    fn try_from(resp: HttpResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            status: resp.status,
            body: serde_json::from_str(&resp.body)?,
        })
    }
}

pub fn bookings_path(phone: Option<&str>) -> String {
    match phone {
        Some(phone) => format!(
            "/api/bookings?phone={}",
            utf8_percent_encode(phone, URI_COMPONENT)
        ),
        None => "/api/bookings".to_string(),
    }
}

pub struct BookingApi<'a> {
    http: &'a dyn HttpPort,
}

impl<'a> BookingApi<'a> {
    pub fn new(http: &'a dyn HttpPort) -> Self {
        Self { http }
    }

    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        let resp = self.http.get("/api/users").await?;
        Ok(serde_json::from_str(&resp.body)?)
    }

    pub async fn bookings(&self, phone: Option<&str>) -> Result<Value, ClientError> {
        let resp = self.http.get(&bookings_path(phone)).await?;
        Ok(serde_json::from_str(&resp.body)?)
    }

    pub async fn create_booking(&self, request: &BookingRequest) -> Result<ApiReply, ClientError> {
        let body = serde_json::to_value(request)?;
        self.http.post_json("/api/bookings", &body).await?.try_into()
    }

    pub async fn mark_no_show(&self, phone: &str) -> Result<ApiReply, ClientError> {
        self.http
            .post_json("/api/admin/no-show", &json!({ "phone": phone }))
            .await?
            .try_into()
    }

    pub async fn reset_no_show(&self, phone: &str) -> Result<ApiReply, ClientError> {
        self.http
            .post_json("/api/admin/reset-no-show", &json!({ "phone": phone }))
            .await?
            .try_into()
    }

    pub async fn rules(&self) -> Result<ApiReply, ClientError> {
        self.http.get("/api/admin/config").await?.try_into()
    }

    pub async fn update_rules(&self, rules: &BookingRules) -> Result<ApiReply, ClientError> {
        let body = serde_json::to_value(rules)?;
        self.http.post_json("/api/admin/config", &body).await?.try_into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bookings_path_without_phone() {
        assert_eq!(bookings_path(None), "/api/bookings");
    }

    #[test]
    fn test_bookings_path_encodes_like_uri_component() {
        assert_eq!(bookings_path(Some("555 123")), "/api/bookings?phone=555%20123");
        assert_eq!(
            bookings_path(Some("+15550000001")),
            "/api/bookings?phone=%2B15550000001"
        );
        assert_eq!(bookings_path(Some("a&b=c/d")), "/api/bookings?phone=a%26b%3Dc%2Fd");
        assert_eq!(bookings_path(Some("it's-(ok)_!~*.")), "/api/bookings?phone=it's-(ok)_!~*.");
    }

    #[test]
    fn test_reply_success_is_2xx() {
        let reply = |status| ApiReply { status, body: Value::Null };
        assert!(reply(200).is_success());
        assert!(reply(201).is_success());
        assert!(!reply(199).is_success());
        assert!(!reply(300).is_success());
        assert!(!reply(409).is_success());
    }

    #[test]
    fn test_reply_rejects_non_json_body() {
        let resp = HttpResponse {
            status: 500,
            body: "<html>oops</html>".to_string(),
        };
        assert!(matches!(ApiReply::try_from(resp), Err(ClientError::Decode(_))));
    }
}
