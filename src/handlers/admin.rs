use crate::errors::ClientError;
use crate::models::BookingRules;
use crate::services::api::BookingApi;
use crate::services::render;
use crate::services::view::{ElementId, ViewPort};
use crate::state::AppState;

pub fn read_admin_phone(view: &dyn ViewPort) -> String {
    view.read_field(ElementId::AdminPhone).trim().to_string()
}

pub fn read_rules_form(view: &dyn ViewPort) -> Result<BookingRules, ClientError> {
    BookingRules::from_form(
        &view.read_field(ElementId::RuleNoShowThreshold),
        &view.read_field(ElementId::RuleAdvanceHours),
        &view.read_field(ElementId::RuleMaxDurationDays),
    )
}

pub async fn mark_no_show(state: &AppState) -> Result<(), ClientError> {
    let phone = read_admin_phone(state.view.as_ref());
    send_no_show(state, &phone).await
}

pub async fn send_no_show(state: &AppState, phone: &str) -> Result<(), ClientError> {
    let reply = BookingApi::new(state.http.as_ref()).mark_no_show(phone).await?;
    tracing::info!(%phone, status = reply.status, "marked no-show");

    state
        .view
        .set_text(ElementId::AdminOut, &render::reply_text("Updated", &reply));
    Ok(())
}

pub async fn reset_no_show(state: &AppState) -> Result<(), ClientError> {
    let phone = read_admin_phone(state.view.as_ref());
    send_reset_no_show(state, &phone).await
}

pub async fn send_reset_no_show(state: &AppState, phone: &str) -> Result<(), ClientError> {
    let reply = BookingApi::new(state.http.as_ref()).reset_no_show(phone).await?;
    tracing::info!(%phone, status = reply.status, "reset no-shows");

    state
        .view
        .set_text(ElementId::AdminOut, &render::reply_text("Updated", &reply));
    Ok(())
}

pub async fn load_rules(state: &AppState) -> Result<(), ClientError> {
    let reply = BookingApi::new(state.http.as_ref()).rules().await?;

    state
        .view
        .set_text(ElementId::AdminOut, &render::reply_text("Rules", &reply));
    Ok(())
}

pub async fn save_rules(state: &AppState) -> Result<(), ClientError> {
    let rules = read_rules_form(state.view.as_ref());
    send_rules(state, rules).await
}

/// An unparseable rule field is reported in the admin output and nothing is sent.
pub async fn send_rules(
    state: &AppState,
    rules: Result<BookingRules, ClientError>,
) -> Result<(), ClientError> {
    let rules = match rules {
        Ok(rules) => rules,
        Err(ClientError::InvalidField { field, value }) => {
            tracing::warn!(field, %value, "rejected rule value");
            state
                .view
                .set_text(ElementId::AdminOut, &format!("Invalid {field}: {value}"));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let reply = BookingApi::new(state.http.as_ref()).update_rules(&rules).await?;
    tracing::info!(status = reply.status, "updated booking rules");

    state
        .view
        .set_text(ElementId::AdminOut, &render::reply_text("Rules", &reply));
    Ok(())
}
