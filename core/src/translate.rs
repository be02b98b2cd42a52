// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Translation with caching and graceful fallback.
//!
//! Failures never reach the caller: the original text is returned instead and
//! the failure is logged.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use luach_hebcal::{FetchError, LangPair, MyMemoryClient};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Remote translation service.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Translates `text` according to `langpair`.
    async fn translate(&self, text: &str, langpair: &LangPair) -> Result<String, FetchError>;
}

#[async_trait]
impl TranslationBackend for MyMemoryClient {
    async fn translate(&self, text: &str, langpair: &LangPair) -> Result<String, FetchError> {
        MyMemoryClient::translate(self, text, langpair).await
    }
}

/// Cache key: the source text and the target language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationKey {
    /// Text to translate.
    pub text: String,
    /// Target language code.
    pub target: String,
}

impl TranslationKey {
    /// Creates a new key.
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: target.into(),
        }
    }
}

/// Successful translations, kept for the lifetime of the process.
///
/// There is no eviction; the cache grows with every distinct text.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: Mutex<HashMap<TranslationKey, String>>,
}

impl TranslationCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a cached translation.
    pub fn get(&self, key: &TranslationKey) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Stores a translation.
    pub fn put(&self, key: TranslationKey, value: String) {
        self.lock().insert(key, value);
    }

    /// Number of cached translations.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<TranslationKey, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Outcome of a single translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Translated text, or the original text when translation failed.
    pub text: String,
    /// Transport or HTTP failure, if any.
    pub error: Option<String>,
}

/// Translates English text through a backend and a shared cache.
pub struct Translator {
    backend: Arc<dyn TranslationBackend>,
    cache: Arc<TranslationCache>,
    batch_delay: Duration,
}

impl std::fmt::Debug for Translator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Translator")
            .field("cache", &self.cache)
            .field("batch_delay", &self.batch_delay)
            .finish_non_exhaustive()
    }
}

impl Translator {
    /// Pause after each request of a batch.
    pub const BATCH_DELAY: Duration = Duration::from_millis(200);

    /// Creates a translator over `backend`, storing results in `cache`.
    pub fn new(backend: Arc<dyn TranslationBackend>, cache: Arc<TranslationCache>) -> Self {
        Self {
            backend,
            cache,
            batch_delay: Self::BATCH_DELAY,
        }
    }

    /// The cache shared by this translator.
    pub fn cache(&self) -> &Arc<TranslationCache> {
        &self.cache
    }

    /// Cached translation of `text`, without any request.
    pub fn cached(&self, text: &str, target: &str) -> Option<String> {
        self.cache.get(&TranslationKey::new(text, target))
    }

    /// Translates `text` into `target`.
    ///
    /// Blank text translates to an empty string without a request.
    #[tracing::instrument(skip(self))]
    pub async fn translate(&self, text: &str, target: &str) -> Translation {
        if text.trim().is_empty() {
            return Translation {
                text: String::new(),
                error: None,
            };
        }

        let key = TranslationKey::new(text, target);
        if let Some(hit) = self.cache.get(&key) {
            return Translation {
                text: hit,
                error: None,
            };
        }

        match self.fetch(key).await {
            Ok(translated) => Translation {
                text: translated,
                error: None,
            },
            // the service answered but refused; not an error for the caller
            Err(FetchError::Api(_)) => Translation {
                text: text.to_string(),
                error: None,
            },
            Err(e) => Translation {
                text: text.to_string(),
                error: Some(e.to_string()),
            },
        }
    }

    /// Translates every text in order, one request at a time.
    ///
    /// Each request is followed by a fixed pause. A failed item maps to its
    /// original text; nothing is retried. Blank texts map to an empty string
    /// without a request.
    #[tracing::instrument(skip(self, texts))]
    pub async fn translate_batch<I, S>(&self, texts: I, target: &str) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut translations = BTreeMap::new();
        for text in texts {
            let text = text.as_ref();
            if text.trim().is_empty() {
                translations.insert(text.to_string(), String::new());
                continue;
            }

            let key = TranslationKey::new(text, target);
            if let Some(hit) = self.cache.get(&key) {
                translations.insert(text.to_string(), hit);
                continue;
            }

            let translated = self.fetch(key).await.unwrap_or_else(|_| text.to_string());
            translations.insert(text.to_string(), translated);
            tokio::time::sleep(self.batch_delay).await;
        }
        translations
    }

    async fn fetch(&self, key: TranslationKey) -> Result<String, FetchError> {
        let langpair = LangPair::from_english(key.target.as_str());
        match self.backend.translate(&key.text, &langpair).await {
            Ok(translated) => {
                self.cache.put(key, translated.clone());
                Ok(translated)
            }
            Err(e) => {
                tracing::warn!(text = %key.text, %langpair, err = %e, "translation failed, keeping original text");
                Err(e)
            }
        }
    }
}

/// Observable state of a [`DebouncedTranslation`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationState {
    /// Latest translation, empty for blank input.
    pub translated: String,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Failure of the latest request.
    pub error: Option<String>,
}

/// Translates text that keeps changing, such as a search box.
///
/// A request is dispatched only after the input has been stable for the
/// debounce window; every new input cancels the pending one.
#[derive(Debug)]
pub struct DebouncedTranslation {
    translator: Arc<Translator>,
    target: String,
    delay: Duration,
    state: Arc<watch::Sender<TranslationState>>,
    pending: Option<JoinHandle<()>>,
}

impl DebouncedTranslation {
    /// Quiet period before a request is sent.
    pub const DEBOUNCE: Duration = Duration::from_millis(300);

    /// Creates a debounced translation into `target`.
    pub fn new(translator: Arc<Translator>, target: impl Into<String>) -> Self {
        let (state, _) = watch::channel(TranslationState::default());
        Self {
            translator,
            target: target.into(),
            delay: Self::DEBOUNCE,
            state: Arc::new(state),
            pending: None,
        }
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<TranslationState> {
        self.state.subscribe()
    }

    /// Current state.
    pub fn state(&self) -> TranslationState {
        self.state.borrow().clone()
    }

    /// Waits until the latest input has been translated. Returns at once when
    /// nothing is pending.
    pub async fn finish(&mut self) {
        if let Some(pending) = self.pending.take()
            && let Err(e) = pending.await
            && !e.is_cancelled()
        {
            tracing::warn!(err = %e, "debounced translation task failed");
        }
    }

    /// Replaces the input text. Must be called within a tokio runtime.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }

        let text = text.into();
        if text.trim().is_empty() {
            self.state.send_replace(TranslationState::default());
            return;
        }

        if let Some(hit) = self.translator.cached(&text, &self.target) {
            self.state.send_replace(TranslationState {
                translated: hit,
                loading: false,
                error: None,
            });
            return;
        }

        let translator = Arc::clone(&self.translator);
        let state = Arc::clone(&self.state);
        let target = self.target.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.send_modify(|a| {
                a.loading = true;
                a.error = None;
            });

            let translation = translator.translate(&text, &target).await;
            state.send_replace(TranslationState {
                translated: translation.text,
                loading: false,
                error: translation.error,
            });
        }));
    }
}

impl Drop for DebouncedTranslation {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}
