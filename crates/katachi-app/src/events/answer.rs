use katachi_core::types::AppEvent;
use katachi_lang_japanese::JapaneseProcessor;
use kanal::AsyncSender;

use crate::state::AppState;

pub async fn handle_answer(
    state: &AppState,
    processor: &JapaneseProcessor,
    input: &str,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let feedback = {
        let mut session = state.session.lock().await;
        let Some(session) = session.as_mut() else {
            tracing::debug!("Answer without a running session");
            return Ok(());
        };

        if session.is_revealed() {
            tracing::debug!("Ignoring repeat answer '{}'", input);
            return Ok(());
        }

        match session.answer(processor, input) {
            Some(correct) => {
                tracing::debug!("Answer '{}' judged {}", input, correct);
                session.feedback_view()
            }
            None => None,
        }
    };

    if let Some(view) = feedback {
        app_to_ui_tx.send(AppEvent::ShowFeedback(view)).await?;
    }
    Ok(())
}
