use chrono::{DateTime, Utc};
use katachi_config::QuizMode;
use katachi_config::session::SessionConfig;
use katachi_core::language::LanguageProcessor;
use katachi_core::types::{FeedbackView, QuestionView, SummaryView};
use katachi_lang_japanese::{JapaneseProcessor, WordEntry};
use katachi_types::ConjugationType;
use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use crate::progress::Progress;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No words found for selected levels and word types")]
    NoWordsMatch,

    #[error("No conjugation types selected")]
    NoCategoriesSelected,

    #[error("Could not build session with current settings")]
    CouldNotBuild,
}

/// One question: a word, the form asked for and the options shown
#[derive(Debug, Clone)]
pub struct QuizItem {
    pub word: WordEntry,
    pub form: ConjugationType,
    /// Correct answer plus distractors, shuffled; empty in input mode
    pub choices: Vec<String>,
}

impl QuizItem {
    pub fn correct_answer(&self) -> &str {
        self.word.correct_answer(self.form).unwrap_or_default()
    }
}

/// Draw a batch of questions matching `config`
pub fn build_session<R: Rng + ?Sized>(
    processor: &JapaneseProcessor,
    config: &SessionConfig,
    rng: &mut R,
) -> Result<Vec<QuizItem>, SessionError> {
    let words = processor
        .lexicon()
        .filter(&config.levels, &config.word_types);
    if words.is_empty() {
        return Err(SessionError::NoWordsMatch);
    }

    let categories = config.valid_categories();
    if categories.is_empty() {
        return Err(SessionError::NoCategoriesSelected);
    }

    let mut items = Vec::with_capacity(config.batch_size);
    for _ in 0..config.batch_size {
        let Some(word) = words.choose(rng) else {
            break;
        };

        let forms: Vec<ConjugationType> = categories
            .iter()
            .copied()
            .filter(|c| c.applies_to(word.word_type))
            .collect();
        let Some(&form) = forms.choose(rng) else {
            continue;
        };
        let Some(correct) = word.correct_answer(form) else {
            tracing::debug!("{} has no {} form, skipping", word.id, form.as_str());
            continue;
        };

        let choices = match config.mode {
            QuizMode::Choice => {
                let mut choices = vec![correct.to_string()];
                choices.extend(processor.distractors(word, form, rng));
                choices.shuffle(rng);
                choices
            }
            QuizMode::Input => Vec::new(),
        };

        items.push(QuizItem {
            word: (*word).clone(),
            form,
            choices,
        });
    }

    if items.is_empty() {
        return Err(SessionError::CouldNotBuild);
    }
    Ok(items)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

impl SessionSummary {
    pub fn message(&self) -> &'static str {
        match self.percent {
            80.. => "すごい！",
            50.. => "いい調子！",
            _ => "がんばって！",
        }
    }
}

impl From<SessionSummary> for SummaryView {
    fn from(summary: SessionSummary) -> Self {
        SummaryView {
            message: summary.message().to_string(),
            correct: summary.correct,
            total: summary.total,
            percent: summary.percent,
        }
    }
}

/// A running batch of questions
#[derive(Debug)]
pub struct ActiveSession {
    pub id: Uuid,
    pub mode: QuizMode,
    pub items: Vec<QuizItem>,
    pub current_index: usize,
    pub streak: u32,
    pub results: Vec<bool>,
    /// Outcome of the current question once it has been answered
    revealed: Option<bool>,
}

impl ActiveSession {
    pub fn new(items: Vec<QuizItem>, mode: QuizMode) -> Self {
        Self {
            id: Uuid::new_v4(),
            mode,
            items,
            current_index: 0,
            streak: 0,
            results: Vec::new(),
            revealed: None,
        }
    }

    pub fn current(&self) -> Option<&QuizItem> {
        self.items.get(self.current_index)
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.items.len()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.is_some()
    }

    pub fn check_answer(&self, processor: &JapaneseProcessor, input: &str) -> bool {
        let Some(item) = self.current() else {
            return false;
        };
        match self.mode {
            QuizMode::Choice => input == item.correct_answer(),
            QuizMode::Input => processor.answers_match(input, item.correct_answer()),
        }
    }

    /// Judge the current question; later answers to it are ignored
    pub fn answer(&mut self, processor: &JapaneseProcessor, input: &str) -> Option<bool> {
        if self.revealed.is_some() || self.is_finished() {
            return None;
        }
        let correct = self.check_answer(processor, input);
        self.revealed = Some(correct);
        Some(correct)
    }

    /// Record an outcome for the current question and move on
    pub fn submit(&mut self, correct: bool, progress: &mut Progress, now: DateTime<Utc>) {
        let Some(item) = self.current() else {
            return;
        };
        progress.record(&item.word.id, correct, now);

        self.streak = if correct { self.streak + 1 } else { 0 };
        self.results.push(correct);
        self.current_index += 1;
        self.revealed = None;
    }

    /// Submit the revealed outcome; false when nothing was answered yet
    pub fn advance(&mut self, progress: &mut Progress, now: DateTime<Utc>) -> bool {
        match self.revealed {
            Some(correct) => {
                self.submit(correct, progress, now);
                true
            }
            None => false,
        }
    }

    pub fn question_view(&self) -> Option<QuestionView> {
        let item = self.current()?;
        Some(QuestionView {
            index: self.current_index + 1,
            total: self.items.len(),
            streak: self.streak,
            meaning: item.word.meaning.clone(),
            headword: item.word.headword().to_string(),
            reading: item.word.kana().to_string(),
            form_label: item.form.label().to_string(),
            choices: item.choices.clone(),
        })
    }

    pub fn feedback_view(&self) -> Option<FeedbackView> {
        let correct = self.revealed?;
        let item = self.current()?;
        Some(FeedbackView {
            correct,
            correct_answer: item.correct_answer().to_string(),
            group: item.word.group.as_str().to_string(),
        })
    }

    pub fn summary(&self) -> SessionSummary {
        let correct = self.results.iter().filter(|r| **r).count();
        let total = self.items.len();
        let percent = if total == 0 {
            0
        } else {
            (correct as f64 / total as f64 * 100.0).round() as u32
        };
        SessionSummary {
            correct,
            total,
            percent,
        }
    }
}
