//! LLM prompt engineering for clause extraction

/// Line placed directly before and after the embedded document text
pub const DOCUMENT_DELIMITER: &str = "---";

/// Builds the prompt that asks the model for critical clauses
///
/// The output depends only on the document text, so the same document always
/// produces the same prompt.
pub struct PromptBuilder<'a> {
    text: &'a str,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::with_capacity(
            ANALYSIS_INSTRUCTIONS.len() + OUTPUT_FORMAT_REMINDER.len() + self.text.len() + 64,
        );

        // 1. Instruction and required fields
        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Output format
        prompt.push_str(OUTPUT_FORMAT_REMINDER);
        prompt.push_str("\n\n");

        // 3. The document, verbatim
        prompt.push_str("Here is the document text:\n");
        prompt.push_str(DOCUMENT_DELIMITER);
        prompt.push('\n');
        prompt.push_str(self.text);
        prompt.push('\n');
        prompt.push_str(DOCUMENT_DELIMITER);
        prompt.push('\n');

        prompt
    }
}

const ANALYSIS_INSTRUCTIONS: &str = r#"You are an expert AI legal assistant. Analyze the following legal document text and extract the clauses that are critical for a non-lawyer to understand.

For each critical clause, create a JSON object with exactly these three keys:
1. "clause": the exact, verbatim text of the clause from the document.
2. "category": a one-word category for the clause. Examples: "Liability", "Termination", "Confidentiality", "Payment", "Governing Law", "Intellectual Property".
3. "explanation": a simple, one-to-two sentence explanation of what the clause means in plain English."#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Return your response as a single, valid JSON array of these objects. Do not include any other text, explanation, or markdown formatting such as ```json outside of the JSON array itself."#;
