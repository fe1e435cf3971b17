use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use tribuna_core::models::{
    EngagementCounts, HighlightOverride, InteractionWindow, Proposal,
};
use tribuna_highlight::{HighlightEngine, ScoringContext};

fn make_proposal(days_ago: i64, theme: Option<String>, situation: Option<String>) -> Proposal {
    let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
    Proposal {
        id: "prop".to_string(),
        title: "Proposal".to_string(),
        kind: None,
        number: None,
        year: None,
        status: None,
        status_situation: situation,
        theme,
        author: None,
        summary: None,
        presentation_date: now.date_naive() - Duration::days(days_ago),
    }
}

fn arb_window() -> impl Strategy<Value = Option<InteractionWindow>> {
    proptest::option::of(
        (0u64..5000, 0u64..5000, 0u64..500, 0u64..500, 0u64..500, 0u64..500).prop_map(
            |(v7, vp7, f7, fp7, s7, sp7)| InteractionWindow {
                views_last7: v7,
                views_prev7: vp7,
                favorites_last7: f7,
                favorites_prev7: fp7,
                shares_last7: s7,
                shares_prev7: sp7,
            },
        ),
    )
}

fn arb_override() -> impl Strategy<Value = Option<HighlightOverride>> {
    proptest::option::of((-5i32..25, proptest::option::of(-30i64..30)).prop_map(
        |(priority, expiry_days)| HighlightOverride {
            priority,
            expires_at: expiry_days.map(|days| {
                Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap() + Duration::days(days)
            }),
        },
    ))
}

fn arb_theme() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![
        Just("Educação".to_string()),
        Just("Saúde".to_string()),
        Just("Tributação".to_string()),
        Just("  Meio Ambiente ".to_string()),
        "[a-zA-Z ]{0,20}",
    ])
}

proptest! {
    #[test]
    fn score_and_components_are_bounded(
        days_ago in -30i64..400,
        comments in 0u64..100_000,
        stances in 0u64..100_000,
        window in arb_window(),
        curation in arb_override(),
        theme in arb_theme(),
        situation in proptest::option::of("[a-zA-Zà-ú ]{0,40}"),
    ) {
        let engine = HighlightEngine::new();
        let ctx = ScoringContext::at(Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap());
        let proposal = make_proposal(days_ago, theme, situation);
        let engagement = EngagementCounts { comments, stances };

        let result = engine.compute(
            &proposal,
            &engagement,
            window.as_ref(),
            curation.as_ref(),
            &ctx,
        );

        prop_assert!((0.0..=1.0).contains(&result.score), "score out of bounds: {}", result.score);
        let c = result.components;
        prop_assert!((0.0..=1.0).contains(&c.recency), "recency out of bounds: {}", c.recency);
        prop_assert!((0.0..=1.0).contains(&c.engagement), "engagement out of bounds: {}", c.engagement);
        prop_assert!((0.0..=1.0).contains(&c.momentum), "momentum out of bounds: {}", c.momentum);
        prop_assert!((0.0..=1.0).contains(&c.theme), "theme out of bounds: {}", c.theme);
        prop_assert!((0.0..=0.5).contains(&c.curation), "curation out of bounds: {}", c.curation);
    }
}

proptest! {
    #[test]
    fn scoring_is_deterministic(
        days_ago in 0i64..100,
        comments in 0u64..1000,
        stances in 0u64..1000,
        window in arb_window(),
        curation in arb_override(),
    ) {
        let engine = HighlightEngine::new();
        let ctx = ScoringContext::at(Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap());
        let proposal = make_proposal(days_ago, Some("Saúde".to_string()), None);
        let engagement = EngagementCounts { comments, stances };

        let first = engine.compute(&proposal, &engagement, window.as_ref(), curation.as_ref(), &ctx);
        let second = engine.compute(&proposal, &engagement, window.as_ref(), curation.as_ref(), &ctx);

        prop_assert_eq!(first, second);
    }
}

proptest! {
    #[test]
    fn older_presentation_never_raises_recency(
        days_ago in 0i64..200,
        comments in 0u64..100,
    ) {
        let engine = HighlightEngine::new();
        let ctx = ScoringContext::at(Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap());
        let engagement = EngagementCounts { comments, stances: 0 };

        let newer = make_proposal(days_ago, None, None);
        let older = make_proposal(days_ago + 1, None, None);

        let newer_recency = engine
            .compute(&newer, &engagement, None, None, &ctx)
            .components
            .recency;
        let older_recency = engine
            .compute(&older, &engagement, None, None, &ctx)
            .components
            .recency;

        prop_assert!(
            older_recency <= newer_recency + f64::EPSILON,
            "recency not monotone: {} day(s) ago {} vs {} day(s) ago {}",
            days_ago, newer_recency, days_ago + 1, older_recency
        );
    }
}
