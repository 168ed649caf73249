use std::sync::Arc;

use tokio::task::JoinSet;

use crate::handlers;
use crate::state::AppState;

/// Renders the user list. A failed load is logged and leaves the list as it was.
pub async fn init(state: &AppState) {
    if let Err(e) = handlers::load_users(state).await {
        tracing::error!(error = %e, "failed to load users");
    }
}

/// Loads the users, then serves view events until the view closes. Form
/// values are read here, at the event; the request runs on its own task.
/// Failures are logged and the target element keeps its previous content.
pub async fn run(state: Arc<AppState>) -> anyhow::Result<()> {
    init(&state).await;

    let mut tasks = JoinSet::new();
    while let Some(event) = state.view.next_event().await {
        let Some(action) = handlers::capture(state.view.as_ref(), event) else {
            continue;
        };

        let state = Arc::clone(&state);
        tasks.spawn(async move {
            if let Err(e) = handlers::perform(&state, action).await {
                tracing::error!(error = %e, ?event, "handler failed");
            }
        });

        while let Some(done) = tasks.try_join_next() {
            done?;
        }
    }

    while let Some(done) = tasks.join_next().await {
        done?;
    }

    tracing::info!("view closed");
    Ok(())
}
