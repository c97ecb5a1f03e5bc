/// Fixed instruction prepended to every transcript before submission.
///
/// The 1000-word cap is advisory wording for the model; nothing enforces it.
pub const SUMMARY_INSTRUCTION: &str = "You are a YouTube video summarizer. You will take the transcript text \
and summarize the entire video, providing the important points within 1000 words. \
Please provide the summary of the text given here:  ";
