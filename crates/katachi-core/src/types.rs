#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Build a new batch from the current session config
    StartSession,
    /// A line typed by the learner: a choice number or a typed answer
    Answer(String),
    /// Move on after feedback was shown
    Next,
    /// Abandon the running session without recording the rest
    Quit,
    ShowQuestion(QuestionView),
    ShowFeedback(FeedbackView),
    ShowSummary(SummaryView),
    /// Blocking notification, e.g. nothing matches the selected filters
    Notify(String),
    SessionEnded,
}

#[derive(Debug, Clone)]
pub struct QuestionView {
    pub index: usize,
    pub total: usize,
    pub streak: u32,
    pub meaning: String,
    pub headword: String,
    pub reading: String,
    pub form_label: String,
    /// Empty in typed-input mode
    pub choices: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FeedbackView {
    pub correct: bool,
    pub correct_answer: String,
    pub group: String,
}

#[derive(Debug, Clone)]
pub struct SummaryView {
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
    pub message: String,
}
