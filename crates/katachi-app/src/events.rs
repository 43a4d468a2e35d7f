use std::sync::Arc;

use katachi_core::types::AppEvent;
use katachi_lang_japanese::JapaneseProcessor;
use kanal::{AsyncReceiver, AsyncSender};
use rand::rngs::StdRng;

use crate::state::AppState;

pub mod answer;
pub mod next;
pub mod start_session;

use answer::handle_answer;
use next::{handle_next, handle_quit};
use start_session::handle_start_session;

/// Whether the event loop keeps running after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    processor: Arc<JapaneseProcessor>,
    mut rng: StdRng,
) -> anyhow::Result<()> {
    tracing::debug!("Event loop waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!("Event received: {:?}", std::mem::discriminant(&event));

        let flow = handle_events(&state, &processor, &mut rng, &app_to_ui_tx, event).await?;
        if flow == Flow::Stop {
            break;
        }
    }

    tracing::debug!("Event loop finished");
    Ok(())
}

async fn handle_events(
    state: &AppState,
    processor: &JapaneseProcessor,
    rng: &mut StdRng,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    match event {
        AppEvent::StartSession => handle_start_session(state, processor, rng, app_to_ui_tx).await,
        AppEvent::Answer(input) => {
            handle_answer(state, processor, &input, app_to_ui_tx).await?;
            Ok(Flow::Continue)
        }
        AppEvent::Next => handle_next(state, app_to_ui_tx).await,
        AppEvent::Quit => handle_quit(state, app_to_ui_tx).await,
        AppEvent::ShowQuestion(_)
        | AppEvent::ShowFeedback(_)
        | AppEvent::ShowSummary(_)
        | AppEvent::Notify(_)
        | AppEvent::SessionEnded => {
            // UI-only events, ignore in backend
            Ok(Flow::Continue)
        }
    }
}
