//! Demo data written to storage the first time a key is found absent.

use chrono::NaiveDate;

use crate::models::board::BoardPost;
use crate::models::comment::{Comment, CommentThreads, Counters};
use crate::models::portfolio::Portfolio;
use crate::models::trade::{Trade, TradeType};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn trade(
    id: &str,
    date: NaiveDate,
    trade_type: TradeType,
    ticker: &str,
    shares: f64,
    price: f64,
    comment: &str,
) -> Trade {
    Trade {
        id: id.to_string(),
        date,
        trade_type,
        ticker: ticker.to_string(),
        shares,
        price,
        comment: comment.to_string(),
    }
}

fn comment(id: &str, author: &str, content: &str, created_at: NaiveDate, is_author: bool) -> Comment {
    Comment {
        id: id.to_string(),
        author: author.to_string(),
        content: content.to_string(),
        created_at,
        is_author,
    }
}

fn counters(pairs: &[(&str, u64)]) -> Counters {
    pairs.iter().map(|(id, n)| (id.to_string(), *n)).collect()
}

// ── Portfolio domain ────────────────────────────────────────────────

pub fn portfolios() -> Vec<Portfolio> {
    use TradeType::{Buy, Sell};

    vec![
        Portfolio {
            id: "1".into(),
            title: "AI Semiconductor Portfolio".into(),
            author: "TechMaster".into(),
            initial_value: 10_000_000.0,
            final_value: 15_800_000.0,
            return_pct: 58.0,
            sharpe_ratio: 1.85,
            created_at: ymd(2024, 2, 15),
            trades: vec![
                trade("1-1", ymd(2024, 2, 15), Buy, "NVDA", 100.0, 450.0, "Riding the AI chip boom"),
                trade("1-2", ymd(2024, 1, 20), Buy, "AMD", 200.0, 120.0, "AMD should follow NVIDIA into AI"),
                trade("1-3", ymd(2024, 1, 10), Buy, "TSMC", 150.0, 85.0, "Leading foundry"),
                trade("1-4", ymd(2024, 2, 1), Sell, "INTC", 80.0, 45.0, "Losing competitiveness"),
                trade("1-5", ymd(2024, 2, 10), Buy, "ASML", 50.0, 750.0, "Core equipment maker"),
                trade("1-6", ymd(2024, 2, 12), Buy, "AVGO", 100.0, 180.0, "Networking chip growth"),
                trade("1-7", ymd(2024, 2, 14), Sell, "MU", 200.0, 85.0, "Memory market uncertainty"),
            ],
        },
        Portfolio {
            id: "2".into(),
            title: "Growth Stock Portfolio".into(),
            author: "VentureInvestor".into(),
            initial_value: 5_000_000.0,
            final_value: 7_250_000.0,
            return_pct: 45.0,
            sharpe_ratio: 1.8,
            created_at: ymd(2024, 1, 15),
            trades: vec![
                trade("2-1", ymd(2024, 1, 15), Buy, "TSLA", 100.0, 200.0, "EV leader"),
                trade("2-2", ymd(2024, 1, 25), Buy, "PLTR", 300.0, 15.0, "Data analytics platform"),
                trade("2-3", ymd(2024, 2, 5), Buy, "SNOW", 150.0, 180.0, "Cloud data warehouse"),
                trade("2-4", ymd(2024, 2, 12), Sell, "UBER", 200.0, 35.0, "Taking profit"),
                trade("2-5", ymd(2024, 2, 14), Buy, "CRWD", 100.0, 250.0, "Security demand"),
                trade("2-6", ymd(2024, 2, 16), Buy, "ZM", 200.0, 120.0, "Remote work staple"),
                trade("2-7", ymd(2024, 2, 18), Sell, "SNAP", 150.0, 12.0, "Weak ad revenue"),
                trade("2-8", ymd(2024, 2, 20), Buy, "SHOP", 100.0, 80.0, "E-commerce platform"),
            ],
        },
        Portfolio {
            id: "3".into(),
            title: "Steady Dividend Portfolio".into(),
            author: "DividendInvestor".into(),
            initial_value: 8_000_000.0,
            final_value: 9_200_000.0,
            return_pct: 15.0,
            sharpe_ratio: 0.95,
            created_at: ymd(2024, 1, 20),
            trades: vec![
                trade("3-1", ymd(2024, 1, 20), Buy, "JNJ", 100.0, 160.0, "Reliable healthcare dividend"),
                trade("3-2", ymd(2024, 1, 25), Buy, "PG", 150.0, 140.0, "Consumer staples"),
                trade("3-3", ymd(2024, 2, 1), Buy, "KO", 200.0, 55.0, "Dividend king"),
                trade("3-4", ymd(2024, 2, 8), Buy, "VZ", 300.0, 35.0, "High yield telecom"),
                trade("3-5", ymd(2024, 2, 15), Buy, "XOM", 100.0, 95.0, "Energy income"),
                trade("3-6", ymd(2024, 2, 18), Buy, "T", 400.0, 25.0, "Telecom yield"),
                trade("3-7", ymd(2024, 2, 20), Sell, "IBM", 80.0, 140.0, "Rebalancing"),
            ],
        },
    ]
}

pub fn portfolio_comments() -> CommentThreads {
    let mut threads = CommentThreads::new();
    threads.insert(
        "1".into(),
        vec![
            comment("c1-1", "Beginner", "Impressive AI chip strategy, NVIDIA plus AMD works well.", ymd(2024, 2, 16), false),
            comment("c1-2", "TechMaster", "Thanks! I picked selectively given the AI growth.", ymd(2024, 2, 16), true),
            comment("c1-3", "FinancePro", "Well structured. Maybe diversify into other sectors?", ymd(2024, 2, 17), false),
        ],
    );
    threads.insert(
        "2".into(),
        vec![
            comment("c2-1", "GrowthFan", "Great growth mix, Tesla and Palantir stand out.", ymd(2024, 2, 15), false),
            comment("c2-2", "VentureInvestor", "Thanks! Risky, but long-term upside is strong.", ymd(2024, 2, 15), true),
        ],
    );
    threads.insert(
        "3".into(),
        vec![
            comment("c3-1", "DividendInvestor", "J&J and P&G are the backbone here.", ymd(2024, 2, 20), true),
            comment("c3-2", "SafetyFirst", "What is the yearly dividend yield?", ymd(2024, 2, 21), false),
        ],
    );
    threads
}

pub fn portfolio_likes() -> Counters {
    counters(&[("1", 42), ("2", 38), ("3", 25)])
}

pub fn portfolio_dislikes() -> Counters {
    counters(&[("1", 3), ("2", 5), ("3", 2)])
}

// ── Board domain ────────────────────────────────────────────────────

pub fn board_posts() -> Vec<BoardPost> {
    let post = |id: &str, author: &str, title: &str, content: &str, created_at, view_count| BoardPost {
        id: id.to_string(),
        author: author.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        created_at,
        view_count,
    };

    vec![
        post(
            "1",
            "InvestMaster",
            "Sharing my H2 2024 strategy",
            "AI stocks are still strong. I am watching semiconductors and biotech. What are you buying?",
            ymd(2024, 2, 15),
            245,
        ),
        post(
            "2",
            "VentureInvestor",
            "Lessons from startup investing",
            "Execution and market timing matter most. Early on, the team beats the idea.",
            ymd(2024, 2, 14),
            189,
        ),
        post(
            "3",
            "TechMaster",
            "AI semiconductor outlook",
            "NVIDIA, AMD and TSMC keep beating estimates. Datacenter demand should keep growing.",
            ymd(2024, 2, 13),
            312,
        ),
        post(
            "4",
            "RealEstatePro",
            "Real estate market trends",
            "Commercial and rental property are recovering. I like small offices and retail units.",
            ymd(2024, 2, 12),
            156,
        ),
        post(
            "5",
            "CryptoMaster",
            "Crypto strategy before the halving",
            "The market is warming up ahead of the Bitcoin halving. I hold mostly BTC and ETH.",
            ymd(2024, 2, 11),
            278,
        ),
    ]
}

pub fn board_comments() -> CommentThreads {
    let mut threads = CommentThreads::new();
    threads.insert(
        "1".into(),
        vec![
            comment("1-1", "NewInvestor", "Thanks for the info, very helpful!", ymd(2024, 2, 15), false),
            comment("1-2", "InvestMaster", "Glad it helped. Ask anytime.", ymd(2024, 2, 15), true),
        ],
    );
    threads.insert(
        "2".into(),
        vec![comment("2-1", "StartupLover", "Agreed, execution is everything.", ymd(2024, 2, 14), false)],
    );
    threads
}

pub fn board_likes() -> Counters {
    counters(&[("1", 15), ("2", 8), ("3", 22), ("4", 5), ("5", 18)])
}

pub fn board_dislikes() -> Counters {
    counters(&[("1", 2), ("2", 1), ("3", 3), ("4", 0), ("5", 2)])
}
