//! Modal numeric input as an external collaborator.
//!
//! The GUI shell collects edit parameters through blocking integer
//! prompts. The engine side only ever sees the collected values; this
//! module models the prompting surface as a trait so the session can be
//! driven by a real dialog implementation or a scripted one in tests.

use std::collections::VecDeque;

/// A source of integer answers to modal prompts.
pub trait PromptInput {
    /// Ask for one integer field. `None` means the user cancelled.
    fn ask_integer(&mut self, label: &str) -> Option<i64>;
}

/// Collect one answer per label, all-or-nothing.
///
/// Returns `None` as soon as any single field is cancelled, so a
/// multi-field operation aborts before it has any effect.
pub fn prompt_all(prompt: &mut dyn PromptInput, labels: &[&str]) -> Option<Vec<i64>> {
    let mut values = Vec::with_capacity(labels.len());
    for label in labels {
        values.push(prompt.ask_integer(label)?);
    }
    Some(values)
}

/// A prompt that replays a fixed sequence of answers.
///
/// Used by tests and the demo in place of a real dialog.
pub struct ScriptedPrompt {
    answers: VecDeque<Option<i64>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Option<i64>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    /// All answers given, no cancellations.
    pub fn answering(values: impl IntoIterator<Item = i64>) -> Self {
        Self::new(values.into_iter().map(Some))
    }
}

impl PromptInput for ScriptedPrompt {
    fn ask_integer(&mut self, _label: &str) -> Option<i64> {
        self.answers.pop_front().flatten()
    }
}
