use katachi_core::types::AppEvent;
use katachi_lang_japanese::JapaneseProcessor;
use kanal::AsyncSender;
use rand::rngs::StdRng;

use super::Flow;
use crate::session::{ActiveSession, build_session};
use crate::state::AppState;

pub async fn handle_start_session(
    state: &AppState,
    processor: &JapaneseProcessor,
    rng: &mut StdRng,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Flow> {
    let session_config = state.config.read().await.session.clone();

    let items = match build_session(processor, &session_config, rng) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Cannot start session: {}", e);
            app_to_ui_tx.send(AppEvent::Notify(e.to_string())).await?;
            app_to_ui_tx.send(AppEvent::SessionEnded).await?;
            return Ok(Flow::Stop);
        }
    };

    let session = ActiveSession::new(items, session_config.mode);
    tracing::info!("Session {} started with {} questions", session.id, session.items.len());

    let view = session.question_view();
    *state.session.lock().await = Some(session);

    if let Some(view) = view {
        app_to_ui_tx.send(AppEvent::ShowQuestion(view)).await?;
    }

    Ok(Flow::Continue)
}
