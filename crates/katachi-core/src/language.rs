/// Answer handling for a studied language
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ja", "zh", "ko", etc.)
    fn language_code(&self) -> &str;

    /// Fold learner input into the single script answers are stored in
    fn normalize(&self, text: &str) -> String;

    /// Compare typed input against the stored answer
    fn answers_match(&self, input: &str, expected: &str) -> bool {
        let input = self.normalize(input);
        !input.is_empty() && input == self.normalize(expected)
    }
}
