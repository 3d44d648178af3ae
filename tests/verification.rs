// End-to-end verification scenarios through the public API.

use chandas_core::{ChandasEngine, ChandasError, MeterRegistry};

const DHARMO_VERSE: &str = "धर्मो रक्षति रक्षितः\nसत्यं वदति सर्वदा।\nज्ञानं ददाति विनयं\nविद्या ददाति पात्रताम्॥";

#[test]
fn anustubh_verse_scores_full_reward() {
    let engine = ChandasEngine::new();
    let v = engine.verify(DHARMO_VERSE, "अनुष्टुभ्", None).unwrap();

    assert!(v.exact.contains("अनुष्टुभ्"));
    assert_eq!(v.reward, 1.0);
    assert!(v.is_correct);

    // Four padas of eight syllables each.
    let padas: Vec<&str> = v.pattern.lines().collect();
    assert_eq!(padas.len(), 4);
    assert!(padas.iter().all(|p| p.chars().count() == 8));
    assert_eq!(v.syllables.len(), 32);
    assert_eq!(v.weights.len(), 32);
}

#[test]
fn wrong_meter_of_different_length_scores_low() {
    let engine = ChandasEngine::new();
    // Tristubh padas have eleven syllables; this verse has eight per pada.
    let v = engine.verify(DHARMO_VERSE, "त्रिष्टुभ्", None).unwrap();

    assert!(!v.exact.contains("त्रिष्टुभ्"));
    assert!(!v.partial.contains("त्रिष्टुभ्"));
    assert_eq!(v.reward, 0.1);
    assert!(!v.is_correct);
}

#[test]
fn empty_input_scores_zero() {
    let engine = ChandasEngine::new();
    let v = engine.verify("", "अनुष्टुभ्", None).unwrap();
    assert_eq!(v.reward, 0.0);
    assert_eq!(v.pattern, "");
}

#[test]
fn unknown_meter_is_a_bad_request() {
    let engine = ChandasEngine::new();
    assert!(matches!(
        engine.verify(DHARMO_VERSE, "कोई-छन्द-नहीं", None),
        Err(ChandasError::UnknownMeter(_))
    ));
}

#[test]
fn three_good_padas_one_off_scores_partial() {
    // Totaka is LLG repeated four times per pada. सुरते is LLG; वीरते
    // starts with a long vowel, breaking one position of one pada.
    let good = "सुरते सुरते सुरते सुरते";
    let off = "वीरते सुरते सुरते सुरते";
    let text = format!("{good}\n{good}\n{good}\n{off}");

    let engine = ChandasEngine::new();
    let v = engine.verify(&text, "तोटकम्", None).unwrap();

    assert!(!v.exact.contains("तोटकम्"));
    assert!(v.partial.contains("तोटकम्"));
    assert_eq!(v.reward, 0.5);
}

#[test]
fn final_syllable_change_does_not_break_exact_match() {
    // Same verse with the last syllable's vowel shortened: ताम् -> तम्.
    let shortened = DHARMO_VERSE.replace("पात्रताम्", "पात्रतम्");
    let engine = ChandasEngine::new();

    let original = engine.verify(DHARMO_VERSE, "अनुष्टुभ्", None).unwrap();
    let changed = engine.verify(&shortened, "अनुष्टुभ्", None).unwrap();

    assert_eq!(original.exact, changed.exact);
    assert_eq!(changed.reward, 1.0);
}

#[test]
fn repeated_verification_is_deterministic() {
    let engine = ChandasEngine::new();
    let first = engine.verify(DHARMO_VERSE, "अनुष्टुभ्", None).unwrap();
    let second = engine.verify(DHARMO_VERSE, "अनुष्टुभ्", None).unwrap();
    assert_eq!(first.pattern, second.pattern);
    assert_eq!(first.exact, second.exact);
    assert_eq!(first.partial, second.partial);
    assert_eq!(first.reward, second.reward);
}

#[test]
fn identification_works_without_a_requested_meter() {
    let engine = ChandasEngine::new();
    let result = engine.identify(DHARMO_VERSE).unwrap();
    assert!(result.exact.contains("अनुष्टुभ्"));
    assert_eq!(result.observed.len(), 4);
}

#[test]
fn custom_catalog_isolates_tests_from_the_builtin_one() {
    let json = r#"{
        "version": 1,
        "meters": [
            { "name": "परीक्षा", "padas": ["GGLG", "GGLG", "GGLG", "GGLG"] }
        ]
    }"#;
    let registry = MeterRegistry::from_json_str(json).unwrap();
    let engine = ChandasEngine::with_registry(registry);

    assert!(matches!(
        engine.verify("सत्यं वद", "अनुष्टुभ्", None),
        Err(ChandasError::UnknownMeter(_))
    ));

    // सीता रमा weighs GGLG, matching the custom meter exactly.
    let text = "सीता रमा\nसीता रमा\nसीता रमा\nसीता रमा";
    let v = engine.verify(text, "परीक्षा", None).unwrap();
    assert_eq!(v.reward, 1.0);
}

#[test]
fn registry_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(ChandasEngine::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                engine.verify(DHARMO_VERSE, "अनुष्टुभ्", None).unwrap().reward
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 1.0);
    }
}
