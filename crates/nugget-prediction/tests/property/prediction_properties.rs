use chrono::{DateTime, Duration, TimeZone, Utc};
use nugget_core::activity::{ActivityRecord, ActivityType, CustomPreferences};
use nugget_core::models::{ConfidenceLevel, PredictedActivity};
use nugget_core::traits::PredictionContext;
use nugget_prediction::{blend, split_weights, BlendInput, IntervalStats, PredictionEngine};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

fn activity_type() -> impl Strategy<Value = ActivityType> {
    prop_oneof![
        Just(ActivityType::Bottle),
        Just(ActivityType::Nursing),
        Just(ActivityType::Pumping),
        Just(ActivityType::Sleep),
        Just(ActivityType::Diaper),
    ]
}

/// Up to 30 records within the last two days.
fn activities() -> impl Strategy<Value = Vec<ActivityRecord>> {
    prop::collection::vec(
        (
            activity_type(),
            0i64..2880,
            prop::option::of(0.0f64..300.0),
            prop::option::of(0.0f64..120.0),
            any::<bool>(),
        ),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (kind, minutes_ago, amount, duration, scheduled))| {
                let mut record =
                    ActivityRecord::new(format!("r{i:03}"), kind, now() - Duration::minutes(minutes_ago));
                record.amount_ml = amount;
                record.duration_minutes = duration;
                record.is_scheduled = scheduled;
                record
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn predictions_are_deterministic(
        records in activities(),
        age in prop::option::of(0i64..800),
        weight in prop::option::of(0.0f64..=1.0),
    ) {
        let prefs = CustomPreferences { preference_weight: weight, ..CustomPreferences::default() };
        let mut ctx = PredictionContext::new(&records, now()).with_preferences(&prefs);
        ctx.birth_date = age.map(|days| now() - Duration::days(days));

        let engine = PredictionEngine::new();
        prop_assert_eq!(engine.predict_all(&ctx), engine.predict_all(&ctx));
    }

    #[test]
    fn input_order_is_irrelevant(records in activities()) {
        let engine = PredictionEngine::new();
        let forward = engine.predict_all(&PredictionContext::new(&records, now()));

        let mut reversed = records.clone();
        reversed.reverse();
        let backward = engine.predict_all(&PredictionContext::new(&reversed, now()));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn results_are_well_formed(records in activities()) {
        let engine = PredictionEngine::new();
        let ctx = PredictionContext::new(&records, now());
        for activity in PredictedActivity::ALL {
            let result = engine.predict(activity, &ctx);
            let weights = result.calculation_details.weights;
            prop_assert!((weights.sum() - 1.0).abs() < 1e-9);
            prop_assert!(result.interval_hours > 0.0);
            prop_assert!(result.recent_pattern.len() <= engine.config().window_size);
            prop_assert_eq!(
                result.confidence_level,
                ConfidenceLevel::from_sample_count(result.calculation_details.sample_count)
            );
            if let Some(last) = result.last_event_time {
                prop_assert!(result.next_event_time > last);
            }
            if let Some(volume) = result.suggested_volume {
                prop_assert!(volume >= 0.0);
                prop_assert_eq!(volume, volume.round());
            }
        }
    }

    #[test]
    fn split_weights_sum_to_one(p in -1.0f64..2.0) {
        let w = split_weights(p);
        prop_assert!((w.age_based + w.recent + w.custom - 1.0).abs() < 1e-9);
        prop_assert!(w.age_based >= 0.0 && w.recent >= 0.0 && w.custom >= 0.0);
    }

    #[test]
    fn blend_stays_within_its_inputs(
        age in prop::option::of(0.0f64..500.0),
        recent in prop::option::of(0.0f64..500.0),
        custom in prop::option::of(0.0f64..500.0),
        p in 0.0f64..=1.0,
    ) {
        let result = blend(&BlendInput::with_weights(age, recent, custom, split_weights(p)));
        let present: Vec<f64> = [age, recent, custom].into_iter().flatten().collect();
        match result.value {
            None => prop_assert!(present.is_empty()),
            Some(value) => {
                let lo = present.iter().cloned().fold(f64::INFINITY, f64::min);
                let hi = present.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(value >= lo - 1e-9 && value <= hi + 1e-9);
            }
        }
    }

    #[test]
    fn valid_gaps_respect_bounds(offsets in prop::collection::vec(0i64..2000, 0..20)) {
        let mut times: Vec<_> = offsets.iter().map(|m| now() - Duration::minutes(*m)).collect();
        times.sort_by(|a, b| b.cmp(a));
        let stats = IntervalStats::from_times(&times, 12.0);
        prop_assert_eq!(stats.gaps.len(), times.len());
        prop_assert!(stats.valid_gaps.iter().all(|h| *h > 0.0 && *h < 12.0));
    }
}
