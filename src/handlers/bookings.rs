use crate::errors::ClientError;
use crate::models::BookingRequest;
use crate::services::api::BookingApi;
use crate::services::render;
use crate::services::view::{ElementId, ViewPort};
use crate::state::AppState;

/// Trimmed `listPhone`, `None` when blank.
pub fn read_phone_filter(view: &dyn ViewPort) -> Option<String> {
    let phone = view.read_field(ElementId::ListPhone);
    let phone = phone.trim();
    (!phone.is_empty()).then(|| phone.to_string())
}

pub fn read_booking_form(view: &dyn ViewPort) -> BookingRequest {
    BookingRequest::from_form(
        &view.read_field(ElementId::Organizer),
        &view.read_field(ElementId::Participants),
        &view.read_field(ElementId::Start),
        &view.read_field(ElementId::End),
        &view.read_field(ElementId::Note),
    )
}

pub async fn list_bookings(state: &AppState) -> Result<(), ClientError> {
    let filter = read_phone_filter(state.view.as_ref());
    show_bookings(state, filter.as_deref()).await
}

pub async fn show_bookings(state: &AppState, filter: Option<&str>) -> Result<(), ClientError> {
    let bookings = BookingApi::new(state.http.as_ref()).bookings(filter).await?;
    tracing::info!(phone = filter.unwrap_or("*"), "listed bookings");

    state
        .view
        .set_text(ElementId::BookingsOut, &render::pretty_json(&bookings));
    Ok(())
}

pub async fn create_booking(state: &AppState) -> Result<(), ClientError> {
    let request = read_booking_form(state.view.as_ref());
    submit_booking(state, &request).await
}

pub async fn submit_booking(state: &AppState, request: &BookingRequest) -> Result<(), ClientError> {
    let reply = BookingApi::new(state.http.as_ref())
        .create_booking(request)
        .await?;

    if reply.is_success() {
        tracing::info!(organizer = %request.organizer_phone, "booking created");
    } else {
        tracing::warn!(status = reply.status, organizer = %request.organizer_phone, "booking rejected");
    }

    state
        .view
        .set_text(ElementId::CreateResult, &render::reply_text("Created", &reply));
    Ok(())
}
