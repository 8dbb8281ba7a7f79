//! Prompt helper for tone-conditioned generation.

use crate::label::ToneLabel;

/// Build the instruction sent to the generation service.
///
/// The label text is interpolated verbatim, leading space included, so the
/// wire prompt matches what the original service sent (the label's leading
/// space doubles the space after "a").
pub fn tone_prompt(tone: ToneLabel, user_text: &str) -> String {
    format!(
        "Respond to the following question naturally and conversationally in a {tone} tone: {user_text}",
        tone = tone.as_str(),
        user_text = user_text,
    )
}

#[cfg(test)]
mod tests {
    use super::tone_prompt;
    use crate::label::ToneLabel;

    #[test]
    fn test_prompt_shape() {
        let prompt = tone_prompt(ToneLabel::Witty, "what is rust?");
        assert_eq!(
            prompt,
            "Respond to the following question naturally and conversationally in a  Witty tone: what is rust?"
        );
    }

    #[test]
    fn test_prompt_keeps_label_period() {
        let prompt = tone_prompt(ToneLabel::AppreciativePeriod, "thanks!");
        assert_eq!(
            prompt,
            "Respond to the following question naturally and conversationally in a  Appreciative. tone: thanks!"
        );
    }
}
