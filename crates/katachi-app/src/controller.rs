use std::sync::Arc;

use katachi_core::types::AppEvent;
use katachi_lang_japanese::JapaneseProcessor;
use kanal::{AsyncReceiver, AsyncSender, Sender};
use rand::rngs::StdRng;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::{Input, watch_input};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    /// Lines from the blocking stdin thread
    pub input: (Sender<Input>, AsyncReceiver<Input>),
}

impl ChannelSet {
    pub fn new() -> Self {
        let (input_tx, input_rx) = kanal::bounded(16);
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
            input: (input_tx, input_rx.to_async()),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        processor: Arc<JapaneseProcessor>,
        rng: StdRng,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            processor,
            rng,
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.input.1.clone(),
            self.channels.ui_to_app.0.clone(),
            std::io::stdout(),
        ));

        // Terminal input
        tasks.spawn(watch_input(
            self.cancel_token.child_token(),
            self.channels.input.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
