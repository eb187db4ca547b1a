//! Confirmation capability for destructive operations
//!
//! Controllers never talk to stdin directly; they receive a `Confirm`
//! implementation so tests (and scripted invocations) can substitute a
//! non-interactive one.

use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt};

use crate::error::AppError;

/// Injected confirmation capability. `confirm` is a yes/no gate;
/// `confirm_phrase` requires the user to type an exact literal phrase
/// (case-sensitive) before a destructive bulk mutation proceeds.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> impl Future<Output = Result<bool, AppError>> + Send;
    fn confirm_phrase(
        &self,
        prompt: &str,
        phrase: &str,
    ) -> impl Future<Output = Result<bool, AppError>> + Send;
}

/// Interactive confirmation over stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl StdinConfirm {
    async fn read_line(prompt: &str) -> Result<String, AppError> {
        let mut stdout = io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;

        let mut input = String::new();
        let stdin = io::stdin();
        let mut reader = io::BufReader::new(stdin);
        reader.read_line(&mut input).await?;
        Ok(input.trim().to_string())
    }
}

impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> Result<bool, AppError> {
        let answer = Self::read_line(&format!("{prompt} [y/N]")).await?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    async fn confirm_phrase(&self, prompt: &str, phrase: &str) -> Result<bool, AppError> {
        let answer = Self::read_line(&format!("{prompt}\nType '{phrase}' to continue:")).await?;
        // Exact literal match, case-sensitive; anything else aborts silently
        Ok(answer == phrase)
    }
}

/// Non-interactive confirmation with pre-supplied answers. Used by the
/// `--yes` / `--confirm-phrase` CLI flags and by tests.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConfirm {
    pub answer: bool,
    pub typed_phrase: Option<String>,
}

impl ScriptedConfirm {
    pub fn yes() -> Self {
        Self {
            answer: true,
            typed_phrase: None,
        }
    }

    pub fn no() -> Self {
        Self::default()
    }

    pub fn with_phrase(phrase: impl Into<String>) -> Self {
        Self {
            answer: true,
            typed_phrase: Some(phrase.into()),
        }
    }
}

impl Confirm for ScriptedConfirm {
    async fn confirm(&self, _prompt: &str) -> Result<bool, AppError> {
        Ok(self.answer)
    }

    async fn confirm_phrase(&self, _prompt: &str, phrase: &str) -> Result<bool, AppError> {
        Ok(self.typed_phrase.as_deref() == Some(phrase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_confirm_answers() {
        assert!(ScriptedConfirm::yes().confirm("proceed?").await.unwrap());
        assert!(!ScriptedConfirm::no().confirm("proceed?").await.unwrap());
    }

    #[tokio::test]
    async fn test_scripted_phrase_requires_exact_match() {
        let exact = ScriptedConfirm::with_phrase("DELETE ALLOCATIONS");
        assert!(
            exact
                .confirm_phrase("sure?", "DELETE ALLOCATIONS")
                .await
                .unwrap()
        );

        let wrong_case = ScriptedConfirm::with_phrase("delete allocations");
        assert!(
            !wrong_case
                .confirm_phrase("sure?", "DELETE ALLOCATIONS")
                .await
                .unwrap()
        );

        let missing = ScriptedConfirm::yes();
        assert!(
            !missing
                .confirm_phrase("sure?", "DELETE ALLOCATIONS")
                .await
                .unwrap()
        );
    }
}
