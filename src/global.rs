//! Process-wide translation state
//!
//! Free functions over one [`TranslationState`] shared by the whole process,
//! for applications that translate from many places and do not want to pass
//! a state around. The state is created on first use with the host locale
//! and guarded by a mutex, so registration, locale changes and lookups are
//! serialized.
//!
//! ```
//! use std::sync::Arc;
//! use appstrings::{StringId, Translator, global};
//!
//! const TEST: StringId<'static> = StringId::new("TEST", "Hello world!");
//!
//! global::install(Arc::new(
//!     Translator::new("ES_MX").with_lang("es_MX").with_string("TEST", "¡Hola mundo!"),
//! ))
//! .unwrap();
//! global::set_locale(Some("es_MX")).unwrap();
//! assert_eq!(global::lookup(TEST), "¡Hola mundo!");
//! ```

use std::sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError};

use crate::error::Result;
use crate::state::TranslationState;
use crate::translator::{StringId, Translator};

static STATE: LazyLock<Mutex<TranslationState>> =
    LazyLock::new(|| Mutex::new(TranslationState::new()));

// Every operation leaves the state consistent before it can panic, so a
// poisoned lock is still usable.
fn state() -> MutexGuard<'static, TranslationState> {
    STATE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` with exclusive access to the process-wide state
pub fn with_state<R>(f: impl FnOnce(&mut TranslationState) -> R) -> R {
    f(&mut state())
}

pub fn install(translator: Arc<Translator>) -> Result<()> {
    state().install(translator)
}

pub fn set_locale(locale: Option<&str>) -> Result<()> {
    state().set_locale(locale)
}

pub fn get_locale() -> String {
    state().get_locale()
}

pub fn lookup(id: StringId<'_>) -> String {
    state().lookup(id)
}

pub fn try_lookup(id: StringId<'_>) -> Result<String> {
    state().try_lookup(id)
}

pub fn list_installed() -> Vec<Arc<Translator>> {
    state().list_installed()
}

pub fn reset() {
    state().reset();
}
