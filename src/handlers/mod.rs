pub mod admin;
pub mod bookings;
pub mod users;

use crate::errors::ClientError;
use crate::models::{BookingRequest, BookingRules};
use crate::services::view::{ElementId, UiEvent, ViewPort};
use crate::state::AppState;

pub use admin::{load_rules, mark_no_show, reset_no_show, save_rules};
pub use bookings::{create_booking, list_bookings};
pub use users::load_users;

/// A click together with the form values it was made with.
#[derive(Debug)]
pub enum Action {
    CreateBooking(BookingRequest),
    ListBookings(Option<String>),
    MarkNoShow(String),
    ResetNoShow(String),
    LoadRules,
    SaveRules(Result<BookingRules, ClientError>),
}

/// Reads the inputs an event needs. Must run when the event arrives, before
/// the view applies any later edit. `None` for elements without a handler.
pub fn capture(view: &dyn ViewPort, event: UiEvent) -> Option<Action> {
    let action = match event {
        UiEvent::Click(ElementId::Create) => Action::CreateBooking(bookings::read_booking_form(view)),
        UiEvent::Click(ElementId::List) => Action::ListBookings(bookings::read_phone_filter(view)),
        UiEvent::Click(ElementId::MarkNoShow) => Action::MarkNoShow(admin::read_admin_phone(view)),
        UiEvent::Click(ElementId::ResetNoShow) => Action::ResetNoShow(admin::read_admin_phone(view)),
        UiEvent::Click(ElementId::LoadRules) => Action::LoadRules,
        UiEvent::Click(ElementId::SaveRules) => Action::SaveRules(admin::read_rules_form(view)),
        UiEvent::Click(other) => {
            tracing::debug!(element = other.as_str(), "click without handler");
            return None;
        }
    };
    Some(action)
}

pub async fn perform(state: &AppState, action: Action) -> Result<(), ClientError> {
    match action {
        Action::CreateBooking(request) => bookings::submit_booking(state, &request).await,
        Action::ListBookings(filter) => bookings::show_bookings(state, filter.as_deref()).await,
        Action::MarkNoShow(phone) => admin::send_no_show(state, &phone).await,
        Action::ResetNoShow(phone) => admin::send_reset_no_show(state, &phone).await,
        Action::LoadRules => admin::load_rules(state).await,
        Action::SaveRules(rules) => admin::send_rules(state, rules).await,
    }
}

/// Captures and performs in one step.
pub async fn dispatch(state: &AppState, event: UiEvent) -> Result<(), ClientError> {
    match capture(state.view.as_ref(), event) {
        Some(action) => perform(state, action).await,
        None => Ok(()),
    }
}
