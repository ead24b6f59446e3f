//! Yes/no/cancel decision surface.
//!
//! Asked before a destructive delete and before a detected date is used.
//! The terminal front-end implements it over stdin; [`ScriptedPrompt`]
//! replays fixed answers.

use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Yes,
    No,
    Cancel,
}

impl Decision {
    #[must_use]
    pub fn is_yes(self) -> bool {
        self == Decision::Yes
    }
}

pub trait Prompt: Send + Sync {
    fn confirm(&self, title: &str, message: &str) -> Decision;
}

/// Answers yes to everything (`--yes` on the command line).
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Prompt for AutoConfirm {
    fn confirm(&self, _title: &str, _message: &str) -> Decision {
        Decision::Yes
    }
}

/// Replays a fixed list of answers and records every question asked.
///
/// Once the answers run out every further question is cancelled.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<Decision>>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    #[must_use]
    pub fn new(answers: impl IntoIterator<Item = Decision>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Messages of every question asked so far, in order
    #[must_use]
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, _title: &str, message: &str) -> Decision {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(message.to_string());
        }
        let next = self.answers.lock().ok().and_then(|mut a| a.pop_front());
        next.unwrap_or(Decision::Cancel)
    }
}
