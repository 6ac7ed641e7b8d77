// ═══════════════════════════════════════════════════════════════════
// Service Tests: MetricsService, TrendingService, IdGenerator, clocks
// ═══════════════════════════════════════════════════════════════════

use chrono::{Duration, NaiveDate, TimeZone, Utc};

use proofolio_core::models::board::BoardPost;
use proofolio_core::models::portfolio::Portfolio;
use proofolio_core::models::trade::{Trade, TradeDraft, TradeType};
use proofolio_core::seed;
use proofolio_core::services::clock::{Clock, FixedClock, SystemClock};
use proofolio_core::services::id_service::IdGenerator;
use proofolio_core::services::metrics_service::{round2, MetricsService, CHART_VARIATION};
use proofolio_core::services::trending_service::TrendingService;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn trade_on(id: &str, d: NaiveDate) -> Trade {
    TradeDraft::new(d, TradeType::Buy, "AAA", 1.0, 1.0).into_trade(id.into())
}

fn portfolio_with(trades: Vec<Trade>, return_pct: f64) -> Portfolio {
    Portfolio {
        id: "p".into(),
        title: "t".into(),
        author: "a".into(),
        initial_value: 100.0,
        final_value: 100.0 + return_pct,
        return_pct,
        sharpe_ratio: return_pct / 10.0,
        created_at: date(2024, 3, 1),
        trades,
    }
}

fn post(created_at: NaiveDate, view_count: u64) -> BoardPost {
    BoardPost {
        id: "1".into(),
        author: "a".into(),
        title: "t".into(),
        content: "c".into(),
        created_at,
        view_count,
    }
}

// ═══════════════════════════════════════════════════════════════════
// Return & risk ratio
// ═══════════════════════════════════════════════════════════════════

mod returns {
    use super::*;

    #[test]
    fn create_form_return_rounds_to_two_decimals() {
        let metrics = MetricsService::new();
        let r = metrics.return_percent(10_000_000.0, 14_235_600.0);
        assert!((r - 42.36).abs() < 0.01 + f64::EPSILON);
        assert_eq!(r, 42.36);
    }

    #[test]
    fn negative_return() {
        let metrics = MetricsService::new();
        assert_eq!(metrics.return_percent(200.0, 150.0), -25.0);
    }

    #[test]
    fn zero_return() {
        let metrics = MetricsService::new();
        assert_eq!(metrics.return_percent(500.0, 500.0), 0.0);
    }

    #[test]
    fn risk_ratio_is_return_over_ten() {
        let metrics = MetricsService::new();
        assert_eq!(metrics.risk_ratio(42.36), 4.24);
        assert_eq!(metrics.risk_ratio(58.0), 5.8);
        assert_eq!(metrics.risk_ratio(-25.0), -2.5);
    }

    #[test]
    fn round2_behaviour() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-3.14159), -3.14);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Investment period
// ═══════════════════════════════════════════════════════════════════

mod period {
    use super::*;

    #[test]
    fn seeded_portfolio_spans_37_days() {
        let metrics = MetricsService::new();
        let portfolios = seed::portfolios();
        let first = portfolios.iter().find(|p| p.id == "1").unwrap();
        let period = metrics.investment_period(&first.trades).unwrap();
        assert_eq!(period.start, date(2024, 1, 10));
        assert_eq!(period.end, date(2024, 2, 15));
        assert_eq!(period.days, 37);
    }

    #[test]
    fn single_trade_is_one_day() {
        let metrics = MetricsService::new();
        let period = metrics
            .investment_period(&[trade_on("a", date(2024, 5, 5))])
            .unwrap();
        assert_eq!(period.days, 1);
        assert_eq!(period.start, period.end);
    }

    #[test]
    fn empty_trades_have_no_period() {
        let metrics = MetricsService::new();
        assert!(metrics.investment_period(&[]).is_none());
    }

    #[test]
    fn sorted_trades_is_ascending_and_stable() {
        let metrics = MetricsService::new();
        let trades = vec![
            trade_on("late", date(2024, 3, 1)),
            trade_on("same-a", date(2024, 1, 1)),
            trade_on("same-b", date(2024, 1, 1)),
        ];
        let ids: Vec<&str> = metrics
            .sorted_trades(&trades)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["same-a", "same-b", "late"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Chart series
// ═══════════════════════════════════════════════════════════════════

mod chart {
    use super::*;

    fn four_trade_portfolio() -> Portfolio {
        portfolio_with(
            vec![
                trade_on("d", date(2024, 2, 20)),
                trade_on("a", date(2024, 1, 5)),
                trade_on("c", date(2024, 2, 1)),
                trade_on("b", date(2024, 1, 15)),
            ],
            40.0,
        )
    }

    #[test]
    fn one_point_per_trade_in_date_order() {
        let series = MetricsService::new().chart_series(&four_trade_portfolio(), 7);
        assert_eq!(series.len(), 4);
        let dates: Vec<NaiveDate> = series.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![date(2024, 1, 5), date(2024, 1, 15), date(2024, 2, 1), date(2024, 2, 20)]
        );
        assert_eq!(series[0].label, "1/5");
        assert_eq!(series[3].label, "2/20");
    }

    #[test]
    fn values_stay_within_variation_of_cumulative_share() {
        let series = MetricsService::new().chart_series(&four_trade_portfolio(), 99);
        for (i, point) in series.iter().enumerate() {
            let base = 10.0 * (i + 1) as f64;
            assert!(
                (point.value - base).abs() <= CHART_VARIATION,
                "point {i} = {} too far from {base}",
                point.value
            );
        }
    }

    #[test]
    fn same_seed_same_series() {
        let metrics = MetricsService::new();
        let p = four_trade_portfolio();
        assert_eq!(metrics.chart_series(&p, 1234), metrics.chart_series(&p, 1234));
    }

    #[test]
    fn different_seeds_differ() {
        let metrics = MetricsService::new();
        let p = four_trade_portfolio();
        assert_ne!(metrics.chart_series(&p, 1), metrics.chart_series(&p, 2));
    }

    #[test]
    fn empty_portfolio_has_empty_series() {
        let series = MetricsService::new().chart_series(&portfolio_with(vec![], 10.0), 3);
        assert!(series.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Trending score
// ═══════════════════════════════════════════════════════════════════

mod trending {
    use super::*;

    #[test]
    fn formula_components() {
        let svc = TrendingService::new();
        let today = date(2024, 2, 20);
        let p = post(date(2024, 2, 15), 245);
        let b = svc.score(&p, 15, 2, 2, today);
        assert_eq!(b.view_count, 245);
        assert!((b.popularity - (245.0 * 0.3 + 15.0 * 0.4 + 2.0 * 0.3 - 2.0 * 0.1)).abs() < 1e-9);
        assert_eq!(b.recency_bonus, 50.0);
        assert!((b.score - (b.popularity + b.recency_bonus)).abs() < 1e-9);
    }

    #[test]
    fn old_posts_get_no_bonus() {
        let svc = TrendingService::new();
        let b = svc.score(&post(date(2024, 1, 1), 0), 0, 0, 0, date(2024, 6, 1));
        assert_eq!(b.recency_bonus, 0.0);
        assert_eq!(b.score, 0.0);
    }

    #[test]
    fn future_post_bonus_exceeds_sixty() {
        let svc = TrendingService::new();
        let b = svc.score(&post(date(2024, 1, 11), 0), 0, 0, 0, date(2024, 1, 1));
        assert_eq!(b.recency_bonus, 80.0);
    }

    #[test]
    fn increasing_in_likes_and_comments() {
        let svc = TrendingService::new();
        let p = post(date(2024, 2, 1), 50);
        let today = date(2024, 2, 10);
        for n in 0..20u64 {
            let base = svc.score(&p, n, 3, 4, today).score;
            assert!(svc.score(&p, n + 1, 3, 4, today).score > base);
            let base = svc.score(&p, 5, 3, n, today).score;
            assert!(svc.score(&p, 5, 3, n + 1, today).score > base);
        }
    }

    #[test]
    fn decreasing_in_dislikes() {
        let svc = TrendingService::new();
        let p = post(date(2024, 2, 1), 50);
        let today = date(2024, 2, 10);
        for n in 0..20u64 {
            let base = svc.score(&p, 5, n, 4, today).score;
            assert!(svc.score(&p, 5, n + 1, 4, today).score < base);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Ids & clocks
// ═══════════════════════════════════════════════════════════════════

mod ids {
    use super::*;

    #[test]
    fn id_is_millisecond_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(now), now.timestamp_millis().to_string());
    }

    #[test]
    fn frozen_clock_still_yields_distinct_increasing_ids() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut ids = IdGenerator::new();
        let issued: Vec<i64> = (0..5).map(|_| ids.next_id(now).parse().unwrap()).collect();
        for pair in issued.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn clock_going_backwards_does_not_repeat() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let mut ids = IdGenerator::new();
        let first: i64 = ids.next_id(now).parse().unwrap();
        let second: i64 = ids.next_id(now - Duration::seconds(10)).parse().unwrap();
        assert_eq!(second, first + 1);
        assert_eq!(ids.last(), second);
    }

    #[test]
    fn resuming_after_skips_past_stored_ids() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let stored = (now.timestamp_millis() + 500).to_string();
        let mut ids = IdGenerator::resuming_after([stored.as_str(), "1", "1-2", "c"]);
        assert_eq!(ids.last(), now.timestamp_millis() + 500);
        assert_eq!(ids.next_id(now), (now.timestamp_millis() + 501).to_string());
    }

    #[test]
    fn resuming_after_nothing_numeric_starts_fresh() {
        let ids = IdGenerator::resuming_after(["1-1", "abc"]);
        assert_eq!(ids.last(), 0);
    }

    #[test]
    fn fixed_clock_at_date() {
        let clock = FixedClock::at_date(date(2024, 2, 20));
        assert_eq!(clock.today(), date(2024, 2, 20));
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 2, 20, 0, 0, 0).unwrap());
    }

    #[test]
    fn system_clock_is_recent() {
        let now = SystemClock.now();
        assert!(now.timestamp() > 1_700_000_000);
    }
}
