use crate::errors::ClientError;
use crate::services::api::BookingApi;
use crate::services::render;
use crate::services::view::ElementId;
use crate::state::AppState;

pub async fn load_users(state: &AppState) -> Result<(), ClientError> {
    let users = BookingApi::new(state.http.as_ref()).users().await?;
    tracing::info!(count = users.len(), "loaded users");

    state
        .view
        .render_list(ElementId::Users, &render::user_lines(&users));
    Ok(())
}
