use std::collections::VecDeque;
use std::io::Write;

use katachi_core::types::{AppEvent, FeedbackView, QuestionView, SummaryView};
use kanal::{AsyncReceiver, AsyncSender};

use crate::io::Input;

/// Typed to abandon a session
pub const QUIT_COMMAND: &str = ":q";

/// What a line of input means right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Idle,
    Choices(Vec<String>),
    Typed,
    Continue,
}

impl Prompt {
    /// Translate a line into the event it stands for, or a hint to print
    pub fn interpret(&self, line: &str) -> Result<Option<AppEvent>, String> {
        let line = line.trim();
        if line == QUIT_COMMAND {
            return Ok(Some(AppEvent::Quit));
        }

        match self {
            Prompt::Idle => Ok(None),
            Prompt::Continue => Ok(Some(AppEvent::Next)),
            Prompt::Typed if line.is_empty() => Err("Type an answer in kana or romaji".to_string()),
            Prompt::Typed => Ok(Some(AppEvent::Answer(line.to_string()))),
            Prompt::Choices(choices) => {
                if let Some(choice) = line
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| choices.get(i))
                {
                    return Ok(Some(AppEvent::Answer(choice.clone())));
                }
                if choices.iter().any(|c| c == line) {
                    return Ok(Some(AppEvent::Answer(line.to_string())));
                }
                Err(format!("Pick a number from 1 to {}", choices.len()))
            }
        }
    }
}

fn render_question(q: &QuestionView, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    write!(out, "[{}/{}]", q.index, q.total)?;
    if q.streak > 1 {
        write!(out, "  {} 連続正解", q.streak)?;
    }
    writeln!(out)?;
    writeln!(out, "{} ({})  {}", q.headword, q.reading, q.meaning)?;
    writeln!(out, "→ {}", q.form_label)?;
    for (i, choice) in q.choices.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, choice)?;
    }
    write!(out, "> ")
}

fn render_feedback(f: &FeedbackView, out: &mut impl Write) -> std::io::Result<()> {
    if f.correct {
        writeln!(out, "正解！")?;
    } else {
        writeln!(out, "不正解… 正解: {} ({})", f.correct_answer, f.group)?;
    }
    write!(out, "Enter で次へ ")
}

fn render_summary(s: &SummaryView, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", s.message)?;
    writeln!(out, "{}/{}  正答率 {}%", s.correct, s.total, s.percent)
}

/// Print a display event; other events are ignored
pub fn render(event: &AppEvent, out: &mut impl Write) -> std::io::Result<()> {
    match event {
        AppEvent::ShowQuestion(q) => render_question(q, out)?,
        AppEvent::ShowFeedback(f) => render_feedback(f, out)?,
        AppEvent::ShowSummary(s) => render_summary(s, out)?,
        AppEvent::Notify(message) => writeln!(out, "! {message}")?,
        _ => {}
    }
    out.flush()
}

/// Interpret one queued line; true when an event went to the app
async fn submit_line(
    prompt: &Prompt,
    line: &str,
    ui_to_app_tx: &AsyncSender<AppEvent>,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    match prompt.interpret(line) {
        Ok(Some(event)) => {
            ui_to_app_tx.send(event).await?;
            Ok(true)
        }
        Ok(None) => Ok(false),
        Err(hint) => {
            writeln!(out, "{hint}")?;
            write!(out, "> ")?;
            out.flush()?;
            Ok(false)
        }
    }
}

/// Terminal front end: prints what the app sends and turns typed lines into events.
///
/// Lines are queued and consumed one per prompt, so input typed (or piped) ahead
/// of the display is answered against the prompt it was meant for.
pub async fn ui_loop<W: Write + Send + 'static>(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    input_rx: AsyncReceiver<Input>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    mut out: W,
) -> anyhow::Result<()> {
    let mut prompt = Prompt::Idle;
    let mut pending: VecDeque<Input> = VecDeque::new();
    let mut input_open = true;

    ui_to_app_tx.send(AppEvent::StartSession).await?;

    // Kept alive across iterations; a receive is never dropped half way
    let mut next_event = Box::pin(app_to_ui_rx.recv());
    let mut next_input = Box::pin(input_rx.recv());

    loop {
        while let Some(input) = pending.pop_front() {
            match input {
                Input::Closed => {
                    ui_to_app_tx.send(AppEvent::Quit).await?;
                    prompt = Prompt::Idle;
                }
                Input::Line(line) if prompt != Prompt::Idle || line.trim() == QUIT_COMMAND => {
                    if submit_line(&prompt, &line, &ui_to_app_tx, &mut out).await? {
                        // Wait for the app's answer before reading further
                        prompt = Prompt::Idle;
                    }
                }
                Input::Line(line) => {
                    pending.push_front(Input::Line(line));
                    break;
                }
            }
        }

        tokio::select! {
            biased;
            event = &mut next_event => {
                next_event = Box::pin(app_to_ui_rx.recv());
                let event = event?;
                render(&event, &mut out)?;
                match event {
                    AppEvent::ShowQuestion(q) if q.choices.is_empty() => prompt = Prompt::Typed,
                    AppEvent::ShowQuestion(q) => prompt = Prompt::Choices(q.choices),
                    AppEvent::ShowFeedback(_) => prompt = Prompt::Continue,
                    AppEvent::ShowSummary(_) => prompt = Prompt::Idle,
                    AppEvent::SessionEnded => break,
                    _ => {}
                }
            }
            input = &mut next_input, if input_open => {
                next_input = Box::pin(input_rx.recv());
                match input {
                    Ok(Input::Line(line)) => pending.push_back(Input::Line(line)),
                    Ok(Input::Closed) | Err(_) => {
                        input_open = false;
                        pending.push_back(Input::Closed);
                    }
                }
            }
        }
    }

    tracing::debug!("UI loop finished");
    Ok(())
}
