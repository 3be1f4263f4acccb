//! Translator selection
//!
//! Picks the single translator that serves the active locale. The scan walks
//! the candidates once, in installation order, and never sorts them:
//!
//! 1. A translator for another language is never selected.
//! 2. An exact `(language, region)` match is selected and ends the scan.
//! 3. A language-only translator replaces whatever was selected so far.
//! 4. A translator for the right language but another region is selected
//!    only if nothing was selected yet.
//!
//! Rules 3 and 4 are asymmetric, so the outcome on an ambiguous registry
//! depends on installation order: `es_MX` then `es` resolves an
//! `es_AR` request to `es`, while `es_MX` alone resolves it to `es_MX`.

use std::sync::Arc;

use crate::locale::LocaleCode;
use crate::translator::Translator;

/// Select the best translator for `active` among `candidates`
///
/// Returns `None` when no candidate shares the active language.
pub fn resolve<'a, I>(active: &LocaleCode, candidates: I) -> Option<&'a Arc<Translator>>
where
    I: IntoIterator<Item = (&'a LocaleCode, &'a Arc<Translator>)>,
{
    let mut best = None;

    for (locale, translator) in candidates {
        if locale.language() != active.language() {
            continue;
        }
        if locale.region() == active.region() {
            return Some(translator);
        }
        if !locale.has_region() || best.is_none() {
            best = Some(translator);
        }
    }

    best
}
