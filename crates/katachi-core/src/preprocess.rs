use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default preprocessor for typed answers
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC) folds full-width latin and half-width kana
        text = text.nfkc().collect();

        text = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_strips_whitespace_and_widths() {
        let processed = DefaultPreprocessor.process("  ｔａｂｅｔｅ \n");
        assert_eq!(processed, "tabete");
    }

    #[test]
    fn test_process_folds_halfwidth_kana() {
        assert_eq!(DefaultPreprocessor.process("ﾀﾍﾞﾃ"), "タベテ");
    }

    #[test]
    fn test_process_empty() {
        assert_eq!(DefaultPreprocessor.process("   "), "");
    }
}
