//! Domain Services
//!
//! Pure text rules shared by generation and refinement.

use crate::domain::value_objects::RefineAction;

/// Output used when the backend answers with no text
pub const EMPTY_OUTPUT_TEXT: &str = "No response generated.";

/// Output used whenever the backend call fails
pub const BACKEND_FAILURE_TEXT: &str =
    "Error generating content. Please check your API key and try again.";

/// Input ready for generation: not blank after trimming
#[inline]
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Insert a suggestion chip into the current input.
///
/// A blank input becomes the chip; otherwise ` - <chip>` is appended.
pub fn add_chip(input: &str, chip: &str) -> String {
    if is_blank(input) {
        chip.to_string()
    } else {
        format!("{input} - {chip}")
    }
}

/// Prompt asking the model to rewrite `previous_output`
pub fn refine_prompt(previous_output: &str, action: RefineAction) -> String {
    format!(
        "Here is the content you generated previously:\n\"{previous_output}\"\n\nTASK: Please rewrite the content above to: {action}. Maintain the original formatting where possible."
    )
}

/// Map backend text to what the user sees
pub fn output_or_placeholder(text: String) -> String {
    if text.is_empty() {
        EMPTY_OUTPUT_TEXT.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_chip() {
        assert_eq!(add_chip("", "Logo Design"), "Logo Design");
        assert_eq!(add_chip("   ", "Logo Design"), "Logo Design");
        assert_eq!(add_chip("Coffee shop", "Logo Design"), "Coffee shop - Logo Design");
        assert_eq!(
            add_chip(&add_chip("Coffee shop", "Logo Design"), "Minimalist"),
            "Coffee shop - Logo Design - Minimalist"
        );
    }

    #[test]
    fn test_refine_prompt_exact() {
        assert_eq!(
            refine_prompt("Hello", RefineAction::FixGrammar),
            "Here is the content you generated previously:\n\"Hello\"\n\nTASK: Please rewrite the content above to: Fix Grammar. Maintain the original formatting where possible."
        );
    }

    #[test]
    fn test_empty_output_placeholder() {
        assert_eq!(output_or_placeholder(String::new()), EMPTY_OUTPUT_TEXT);
        assert_eq!(output_or_placeholder("hi".into()), "hi");
    }
}
