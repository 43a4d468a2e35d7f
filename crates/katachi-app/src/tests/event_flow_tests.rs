use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncReceiver;
use katachi_config::session::SessionConfig;
use katachi_config::{Config, QuizMode};
use katachi_core::types::AppEvent;
use katachi_lang_japanese::JapaneseProcessor;
use katachi_types::JlptLevel;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::timeout;

use crate::events::event_loop;
use crate::profile::{Profile, ProfileStore};
use crate::state::AppState;

fn test_state(dir: &Path, session: SessionConfig) -> Arc<AppState> {
    let config = Config {
        session,
        ..Config::default()
    };
    let store = ProfileStore::at("test", dir.join("test.json"));
    Arc::new(AppState::new(config, Profile::named("test"), store))
}

async fn recv(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("channel closed")
}

async fn current_answer(state: &AppState) -> String {
    let session = state.session.lock().await;
    session
        .as_ref()
        .and_then(|s| s.current())
        .map(|item| item.correct_answer().to_string())
        .expect("no current question")
}

#[tokio::test]
async fn test_full_session_over_channels() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(
        dir.path(),
        SessionConfig {
            batch_size: 5,
            mode: QuizMode::Input,
            ..SessionConfig::default()
        },
    );
    let (ui_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();
    let handle = tokio::spawn(event_loop(
        state.clone(),
        app_rx,
        app_tx,
        Arc::new(JapaneseProcessor::new()),
        StdRng::seed_from_u64(1),
    ));

    ui_tx.send(AppEvent::StartSession).await.unwrap();

    for i in 0..5 {
        match recv(&ui_rx).await {
            AppEvent::ShowQuestion(q) => {
                assert_eq!(q.index, i + 1);
                assert_eq!(q.total, 5);
                assert_eq!(q.streak, i as u32);
                assert!(q.choices.is_empty());
            }
            other => panic!("expected a question, got {other:?}"),
        }

        let answer = current_answer(&state).await;
        ui_tx.send(AppEvent::Answer(answer)).await.unwrap();
        match recv(&ui_rx).await {
            AppEvent::ShowFeedback(f) => assert!(f.correct),
            other => panic!("expected feedback, got {other:?}"),
        }
        ui_tx.send(AppEvent::Next).await.unwrap();
    }

    match recv(&ui_rx).await {
        AppEvent::ShowSummary(s) => {
            assert_eq!((s.correct, s.total, s.percent), (5, 5, 100));
            assert_eq!(s.message, "すごい！");
        }
        other => panic!("expected summary, got {other:?}"),
    }
    assert!(matches!(recv(&ui_rx).await, AppEvent::SessionEnded));

    let result = timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
    assert!(result.is_ok());

    let saved = ProfileStore::at("test", dir.path().join("test.json")).load().unwrap();
    assert_eq!(saved.progress.global.total_answered, 5);
    assert_eq!(saved.progress.global.total_correct, 5);
}

#[tokio::test]
async fn test_answer_is_judged_once() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path(), SessionConfig::default());
    let (ui_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();
    tokio::spawn(event_loop(
        state.clone(),
        app_rx,
        app_tx,
        Arc::new(JapaneseProcessor::new()),
        StdRng::seed_from_u64(2),
    ));

    ui_tx.send(AppEvent::StartSession).await.unwrap();
    let choices = match recv(&ui_rx).await {
        AppEvent::ShowQuestion(q) => q.choices,
        other => panic!("expected a question, got {other:?}"),
    };
    assert_eq!(choices.len(), 4);

    // Moving on before answering does nothing
    ui_tx.send(AppEvent::Next).await.unwrap();

    let answer = current_answer(&state).await;
    let wrong = choices.iter().find(|c| **c != answer).unwrap().clone();
    ui_tx.send(AppEvent::Answer(wrong)).await.unwrap();
    ui_tx.send(AppEvent::Answer(answer.clone())).await.unwrap();

    match recv(&ui_rx).await {
        AppEvent::ShowFeedback(f) => {
            assert!(!f.correct);
            assert_eq!(f.correct_answer, answer);
        }
        other => panic!("expected feedback, got {other:?}"),
    }

    ui_tx.send(AppEvent::Next).await.unwrap();
    assert!(matches!(recv(&ui_rx).await, AppEvent::ShowQuestion(_)));
    assert!(ui_rx.is_empty());
}

#[tokio::test]
async fn test_no_matching_words_notifies() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(
        dir.path(),
        SessionConfig {
            levels: vec![JlptLevel::N1],
            ..SessionConfig::default()
        },
    );
    let (ui_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();
    let handle = tokio::spawn(event_loop(
        state,
        app_rx,
        app_tx,
        Arc::new(JapaneseProcessor::new()),
        StdRng::seed_from_u64(3),
    ));

    ui_tx.send(AppEvent::StartSession).await.unwrap();
    match recv(&ui_rx).await {
        AppEvent::Notify(message) => {
            assert_eq!(message, "No words found for selected levels and word types")
        }
        other => panic!("expected a notification, got {other:?}"),
    }
    assert!(matches!(recv(&ui_rx).await, AppEvent::SessionEnded));
    assert!(timeout(Duration::from_secs(2), handle).await.unwrap().unwrap().is_ok());
}

#[tokio::test]
async fn test_quit_keeps_recorded_answers() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path(), SessionConfig::default());
    let (ui_tx, app_rx) = kanal::unbounded_async::<AppEvent>();
    let (app_tx, ui_rx) = kanal::unbounded_async::<AppEvent>();
    tokio::spawn(event_loop(
        state.clone(),
        app_rx,
        app_tx,
        Arc::new(JapaneseProcessor::new()),
        StdRng::seed_from_u64(4),
    ));

    ui_tx.send(AppEvent::StartSession).await.unwrap();
    assert!(matches!(recv(&ui_rx).await, AppEvent::ShowQuestion(_)));

    ui_tx.send(AppEvent::Answer("x".to_string())).await.unwrap();
    assert!(matches!(recv(&ui_rx).await, AppEvent::ShowFeedback(_)));
    ui_tx.send(AppEvent::Next).await.unwrap();
    assert!(matches!(recv(&ui_rx).await, AppEvent::ShowQuestion(_)));

    ui_tx.send(AppEvent::Quit).await.unwrap();
    assert!(matches!(recv(&ui_rx).await, AppEvent::SessionEnded));

    assert!(state.session.lock().await.is_none());
    let saved = ProfileStore::at("test", dir.path().join("test.json")).load().unwrap();
    assert_eq!(saved.progress.global.total_answered, 1);
    assert_eq!(saved.progress.global.total_correct, 0);
}
