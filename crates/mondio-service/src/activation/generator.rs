//! Unique activation code generation with conflict retry.
//!
//! Codes are drawn at random and inserted directly; the unique constraint
//! on the code column is the arbiter of uniqueness. A conflict from the
//! insert triggers a redraw, so there is no check-then-insert window. After
//! [`MAX_ATTEMPTS`] conflicts generation gives up for that code — at 32^8
//! possible codes, a hundred collisions means something is systemically
//! wrong, not bad luck.

use async_trait::async_trait;
use rand::Rng;
use tracing::{debug, warn};

use mondio_core::error::AppError;
use mondio_core::result::AppResult;
use mondio_entity::activation::ActivationCode;

/// Code alphabet: uppercase letters and digits, excluding the visually
/// confusable glyphs `0`, `O`, `I`, and `1`.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of every generated code.
pub const CODE_LENGTH: usize = 8;

/// Maximum insert attempts per code before giving up.
pub const MAX_ATTEMPTS: usize = 100;

/// Storage seam for code inserts.
///
/// A duplicate code must surface as a conflict error
/// ([`AppError::is_conflict`] returns true); the generator treats any other
/// error as fatal for the current code.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Insert a freshly drawn code, relying on the unique constraint.
    async fn insert_code(&self, code: &str) -> AppResult<ActivationCode>;
}

/// Outcome of generating one code within a batch.
#[derive(Debug)]
pub struct CodeOutcome {
    /// Zero-based position within the batch.
    pub index: usize,
    /// The created code, or the error message that stopped this index.
    pub result: Result<ActivationCode, String>,
}

/// Generates unique activation codes against a [`CodeStore`].
#[derive(Debug, Clone)]
pub struct CodeGenerator;

impl CodeGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Draw one candidate code, uniformly at random.
    pub fn draw(&self) -> String {
        let mut rng = rand::rng();
        (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
            .collect()
    }

    /// Generate and persist one unique code.
    ///
    /// Redraws on conflict; fails with an exhausted error after
    /// [`MAX_ATTEMPTS`] attempts. Any non-conflict storage error propagates
    /// immediately.
    pub async fn generate_unique(&self, store: &dyn CodeStore) -> AppResult<ActivationCode> {
        for attempt in 1..=MAX_ATTEMPTS {
            let code = self.draw();
            match store.insert_code(&code).await {
                Ok(created) => {
                    debug!(code = %created.code, attempt, "Generated activation code");
                    return Ok(created);
                }
                Err(e) if e.is_conflict() => {
                    debug!(attempt, "Code collision, redrawing");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::exhausted(format!(
            "Could not generate a unique code after {MAX_ATTEMPTS} attempts"
        )))
    }

    /// Generate a batch of codes, one insert per success.
    ///
    /// A failure for one index is recorded and does not abort the remaining
    /// indices; the caller reports the collected outcomes.
    pub async fn generate_batch(&self, store: &dyn CodeStore, count: usize) -> Vec<CodeOutcome> {
        let mut outcomes = Vec::with_capacity(count);
        for index in 0..count {
            let result = self.generate_unique(store).await.map_err(|e| {
                warn!(index, error = %e, "Failed to generate code");
                e.to_string()
            });
            outcomes.push(CodeOutcome { index, result });
        }
        outcomes
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mondio_core::error::ErrorKind;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// In-memory store that can be primed to conflict or fail.
    #[derive(Default)]
    struct MockStore {
        codes: Mutex<HashSet<String>>,
        insert_calls: Mutex<usize>,
        /// Report this many conflicts before accepting an insert.
        conflicts_remaining: Mutex<usize>,
        /// Always report a conflict, regardless of the code value.
        always_conflict: bool,
    }

    impl MockStore {
        fn with_conflicts(n: usize) -> Self {
            Self {
                conflicts_remaining: Mutex::new(n),
                ..Self::default()
            }
        }

        fn always_conflicting() -> Self {
            Self {
                always_conflict: true,
                ..Self::default()
            }
        }

        fn insert_calls(&self) -> usize {
            *self.insert_calls.lock().unwrap()
        }

        fn stored(&self) -> usize {
            self.codes.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CodeStore for MockStore {
        async fn insert_code(&self, code: &str) -> AppResult<ActivationCode> {
            *self.insert_calls.lock().unwrap() += 1;

            if self.always_conflict {
                return Err(AppError::conflict("code exists"));
            }

            {
                let mut remaining = self.conflicts_remaining.lock().unwrap();
                if *remaining > 0 {
                    *remaining -= 1;
                    return Err(AppError::conflict("code exists"));
                }
            }

            let mut codes = self.codes.lock().unwrap();
            if !codes.insert(code.to_string()) {
                return Err(AppError::conflict("code exists"));
            }

            Ok(ActivationCode {
                id: Uuid::new_v4(),
                code: code.to_string(),
                used: false,
                used_by: None,
                used_at: None,
                created_at: Utc::now(),
            })
        }
    }

    #[test]
    fn test_draw_length_and_alphabet() {
        let generator = CodeGenerator::new();
        for _ in 0..200 {
            let code = generator.draw();
            assert_eq!(code.len(), CODE_LENGTH);
            for ch in code.bytes() {
                assert!(CODE_ALPHABET.contains(&ch), "unexpected character {ch}");
            }
            for confusable in ['0', 'O', 'I', '1'] {
                assert!(!code.contains(confusable));
            }
        }
    }

    #[tokio::test]
    async fn test_empty_store_yields_distinct_codes() {
        let generator = CodeGenerator::new();
        let store = MockStore::default();

        let outcomes = generator.generate_batch(&store, 10).await;

        assert_eq!(outcomes.len(), 10);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
        assert_eq!(store.stored(), 10);
        assert_eq!(store.insert_calls(), 10);
    }

    #[tokio::test]
    async fn test_retries_exactly_past_conflicts() {
        let generator = CodeGenerator::new();
        let store = MockStore::with_conflicts(3);

        let code = generator.generate_unique(&store).await.unwrap();

        assert_eq!(code.code.len(), CODE_LENGTH);
        // 3 conflicting attempts plus the accepted one.
        assert_eq!(store.insert_calls(), 4);
    }

    #[tokio::test]
    async fn test_exhaustion_after_max_attempts() {
        let generator = CodeGenerator::new();
        let store = MockStore::always_conflicting();

        let err = generator.generate_unique(&store).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Exhausted);
        assert_eq!(store.insert_calls(), MAX_ATTEMPTS);
        assert_eq!(store.stored(), 0);
    }

    #[tokio::test]
    async fn test_batch_continues_past_failures() {
        struct FlakyStore {
            inner: MockStore,
            fail_first: Mutex<bool>,
        }

        #[async_trait]
        impl CodeStore for FlakyStore {
            async fn insert_code(&self, code: &str) -> AppResult<ActivationCode> {
                let should_fail = {
                    let mut fail = self.fail_first.lock().unwrap();
                    if *fail {
                        *fail = false;
                        true
                    } else {
                        false
                    }
                };
                if should_fail {
                    return Err(AppError::database("connection reset"));
                }
                self.inner.insert_code(code).await
            }
        }

        let generator = CodeGenerator::new();
        let store = FlakyStore {
            inner: MockStore::default(),
            fail_first: Mutex::new(true),
        };

        let outcomes = generator.generate_batch(&store, 5).await;

        assert_eq!(outcomes.len(), 5);
        assert!(outcomes[0].result.is_err());
        assert!(outcomes[1..].iter().all(|o| o.result.is_ok()));
        assert_eq!(store.inner.stored(), 4);
    }
}
