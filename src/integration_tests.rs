//! End-to-end scenarios: install translators, pick a locale, look strings up.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::*;

    // ============================================================================
    // Fixtures: the same identifier set declared for several locales
    // ============================================================================

    fn en() -> Arc<Translator> {
        Arc::new(
            Translator::new("EN")
                .with_lang("en")
                .with_metadata("desc", "for testing purposes")
                .with_string("TEST", "English"),
        )
    }

    fn es() -> Arc<Translator> {
        Arc::new(Translator::new("ES").with_lang("es").with_string("TEST", "Spanish"))
    }

    fn es_mx() -> Arc<Translator> {
        Arc::new(
            Translator::new("ES_MX")
                .with_lang("es_MX")
                .with_string("TEST", "Spanish_Mexico"),
        )
    }

    fn state_for(locale: &str, translators: &[Arc<Translator>]) -> TranslationState {
        let mut state = TranslationState::with_provider(FixedLocale::new("en_GB.UTF-8"));
        state.set_locale(Some(locale)).unwrap();
        for translator in translators {
            state.install(Arc::clone(translator)).unwrap();
        }
        state
    }

    // ============================================================================
    // Registration
    // ============================================================================

    #[test]
    fn test_translator_without_lang_is_rejected() {
        let mut state = TranslationState::with_provider(FixedLocale::new("en"));
        let error1 = Arc::new(Translator::new("Error1").with_string("TEST", "Not valid"));
        assert!(matches!(
            state.install(error1),
            Err(Error::MissingLanguageTag { .. })
        ));
    }

    #[test]
    fn test_translator_without_ids_is_rejected() {
        let mut state = TranslationState::with_provider(FixedLocale::new("en"));
        state.install(en()).unwrap();
        let error2 = Arc::new(Translator::new("Error2").with_lang("pt"));
        assert!(matches!(
            state.install(error2),
            Err(Error::InconsistentStringSet { .. })
        ));
    }

    #[test]
    fn test_translator_with_bad_lang_is_rejected() {
        let mut state = TranslationState::with_provider(FixedLocale::new("en"));
        let error3 = Arc::new(Translator::new("Error3").with_lang("pt_"));
        assert_eq!(
            state.install(error3),
            Err(Error::InvalidLocale("pt_".to_string()))
        );
    }

    #[test]
    fn test_installing_twice_keeps_one_entry() {
        let es = es();
        let state = state_for("es", &[Arc::clone(&es), Arc::clone(&es)]);
        assert_eq!(state.list_installed().len(), 1);
    }

    #[test]
    fn test_list_installed_in_order() {
        let state = state_for("es", &[es(), es_mx()]);
        let names: Vec<_> = state
            .list_installed()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["ES", "ES_MX"]);
    }

    // ============================================================================
    // Resolution
    // ============================================================================

    #[test]
    fn test_no_translators_returns_intrinsic_text() {
        let mut state = state_for("en", &[]);
        let en = en();
        let es = es();
        assert_eq!(state.lookup(en.id("TEST").unwrap()), "English");
        assert_eq!(state.lookup(es.id("TEST").unwrap()), "Spanish");
    }

    #[test]
    fn test_language_match() {
        let es = es();
        let mut state = state_for("en", &[Arc::clone(&es), en()]);
        assert_eq!(state.lookup(es.id("TEST").unwrap()), "English");
    }

    #[test]
    fn test_no_language_match_returns_intrinsic_text() {
        let en = en();
        let mut state = state_for("pt", &[es(), Arc::clone(&en)]);
        assert_eq!(state.lookup(en.id("TEST").unwrap()), "English");
        assert!(state.resolved().is_none());
    }

    #[test]
    fn test_language_only_translator_serves_regional_locale() {
        let es = es();
        let mut state = state_for("es_MX", &[Arc::clone(&es), en()]);
        assert_eq!(state.lookup(es.id("TEST").unwrap()), "Spanish");
    }

    #[test]
    fn test_exact_match_wins_in_either_order() {
        let es = es();
        for order in [[es.clone(), es_mx()], [es_mx(), es.clone()]] {
            let mut state = state_for("es_MX", &order);
            assert_eq!(state.lookup(es.id("TEST").unwrap()), "Spanish_Mexico");
        }
    }

    #[test]
    fn test_language_only_overrides_earlier_region_mismatch() {
        let es = es();
        let mut state = state_for("es_AR", &[es_mx(), Arc::clone(&es)]);
        assert_eq!(state.lookup(es.id("TEST").unwrap()), "Spanish");
    }

    #[test]
    fn test_region_mismatch_used_when_nothing_better() {
        let es_mx = es_mx();
        let mut state = state_for("es_AR", &[en(), Arc::clone(&es_mx)]);
        assert_eq!(state.lookup(es_mx.id("TEST").unwrap()), "Spanish_Mexico");
    }

    // ============================================================================
    // Locale handling
    // ============================================================================

    #[test]
    fn test_get_locale_normalizes_case() {
        let mut state = state_for("PT", &[]);
        assert_eq!(state.get_locale(), "pt");
        state.set_locale(Some("en_US")).unwrap();
        assert_eq!(state.get_locale(), "en_US");
    }

    #[test]
    fn test_reset_restores_host_locale() {
        let mut state = state_for("es", &[es(), es_mx()]);
        state.reset();
        assert!(state.list_installed().is_empty());
        assert_eq!(state.get_locale(), "en_GB");
    }

    #[test]
    fn test_json_declarations_install_alongside_built_ones() {
        let es_mx = Translator::from_json(
            "ES_MX",
            r#"{"@metadata": {"lang": "es_MX"}, "TEST": "¡Hola mundo!"}"#,
        )
        .unwrap();

        let en = en();
        let mut state = state_for("es_MX", &[Arc::clone(&en), Arc::new(es_mx)]);
        assert_eq!(state.lookup(en.id("TEST").unwrap()), "¡Hola mundo!");
    }

    // ============================================================================
    // Process-wide state (the only test touching it)
    // ============================================================================

    #[test]
    fn test_global_state() {
        const TEST: StringId<'static> = StringId::new("TEST", "Intrinsic");

        global::reset();
        global::install(es()).unwrap();
        global::install(es_mx()).unwrap();

        global::set_locale(Some("es_mx")).unwrap();
        assert_eq!(global::get_locale(), "es_MX");
        assert_eq!(global::lookup(TEST), "Spanish_Mexico");

        global::set_locale(Some("pt")).unwrap();
        assert_eq!(global::lookup(TEST), "Intrinsic");
        assert_eq!(global::try_lookup(TEST), Ok("Intrinsic".to_string()));
        assert_eq!(global::list_installed().len(), 2);
        assert_eq!(global::with_state(|state| state.resolved()), None);

        global::reset();
        assert!(global::list_installed().is_empty());
    }
}
