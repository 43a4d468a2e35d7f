use chrono::Utc;
use katachi_core::types::{AppEvent, SummaryView};
use kanal::AsyncSender;

use super::Flow;
use crate::state::AppState;

/// Record the revealed answer, then show the next question or the summary
pub async fn handle_next(state: &AppState, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<Flow> {
    let mut guard = state.session.lock().await;
    let Some(session) = guard.as_mut() else {
        return Ok(Flow::Continue);
    };

    {
        let mut profile = state.profile.write().await;
        if !session.advance(&mut profile.progress, Utc::now()) {
            return Ok(Flow::Continue);
        }
    }
    if let Err(e) = state.save_profile().await {
        tracing::warn!("Failed to save progress: {}", e);
    }

    if let Some(view) = session.question_view() {
        app_to_ui_tx.send(AppEvent::ShowQuestion(view)).await?;
        return Ok(Flow::Continue);
    }

    let summary = session.summary();
    tracing::info!(
        "Session {} finished: {}/{}",
        session.id,
        summary.correct,
        summary.total
    );
    *guard = None;
    drop(guard);

    app_to_ui_tx
        .send(AppEvent::ShowSummary(SummaryView::from(summary)))
        .await?;
    app_to_ui_tx.send(AppEvent::SessionEnded).await?;
    Ok(Flow::Stop)
}

/// Abandon the session; answers already recorded are kept
pub async fn handle_quit(state: &AppState, app_to_ui_tx: &AsyncSender<AppEvent>) -> anyhow::Result<Flow> {
    if let Some(session) = state.session.lock().await.take() {
        tracing::info!(
            "Session {} abandoned after {} of {} questions",
            session.id,
            session.results.len(),
            session.items.len()
        );
    }

    state.save_profile().await?;
    app_to_ui_tx.send(AppEvent::SessionEnded).await?;
    Ok(Flow::Stop)
}
