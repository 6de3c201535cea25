//! Crate-level tests for the collection aggregation pipeline: raw entity
//! records in, display-ready items and summary statistics out.

use chrono::NaiveDate;
use std::collections::HashMap;

use maltcellar_backend::entities::{purchases, tasting_notes, whiskies};
use maltcellar_backend::services::collection::{build_collection_items, summarize};

fn whiskey(id: i32, brand: &str, whiskey_type: &str, volume_ml: Option<i32>) -> whiskies::Model {
    whiskies::Model {
        id,
        name: format!("Bottle {}", id),
        name_en: None,
        name_ko: None,
        brand: Some(brand.to_string()),
        whiskey_type: Some(whiskey_type.to_string()),
        age_years: None,
        volume_ml,
        abv: None,
        region: None,
        distillery: None,
        cask_info: None,
        description: None,
        reference_url: None,
        image_url: None,
        current_price: None,
        current_price_usd: None,
        price_updated_at: None,
        created_at: None,
    }
}

fn purchase(id: i32, whiskey_id: i32, date: NaiveDate) -> purchases::Model {
    purchases::Model {
        id,
        whiskey_id,
        purchase_date: date,
        store: None,
        final_price: None,
        discount_basic: None,
        discount_coupon: None,
        discount_membership: None,
        discount_event: None,
        discount_currency: None,
        exchange_rate: None,
        created_at: None,
    }
}

fn note(
    id: i32,
    purchase_id: i32,
    date: NaiveDate,
    rating: Option<f64>,
    consumed: Option<f64>,
) -> tasting_notes::Model {
    tasting_notes::Model {
        id,
        purchase_id,
        tasting_date: date,
        rating,
        nose: None,
        palate: None,
        finish: None,
        notes: None,
        amount_consumed_ml: consumed,
        created_at: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn full_collection_pipeline() {
    let today = date(2026, 8, 1);

    let mut whiskeys = HashMap::new();
    whiskeys.insert(1, whiskey(1, "Glenfarclas", "single malt", Some(700)));
    whiskeys.insert(2, whiskey(2, "Wild Turkey", "bourbon", Some(750)));

    let purchase_rows = vec![
        purchase(10, 1, date(2026, 3, 1)),
        purchase(11, 2, date(2026, 1, 20)),
        purchase(12, 1, date(2025, 11, 5)),
    ];

    let mut notes = HashMap::new();
    notes.insert(
        10,
        vec![
            note(100, 10, date(2026, 4, 1), Some(8.0), Some(45.0)),
            note(101, 10, date(2026, 7, 2), Some(6.0), Some(25.0)),
        ],
    );
    notes.insert(
        11,
        vec![note(102, 11, date(2026, 2, 1), None, Some(375.0))],
    );
    // Purchase 12: never tasted

    let items = build_collection_items(&purchase_rows, &whiskeys, &notes, today);
    assert_eq!(items.len(), 3);

    // Order follows the input (already date-descending)
    assert_eq!(items[0].purchase.id, 10);
    assert_eq!(items[1].purchase.id, 11);
    assert_eq!(items[2].purchase.id, 12);

    // Item 10: two rated notes, 70ml gone from a 700ml bottle
    assert_eq!(items[0].tasting_count, 2);
    assert_eq!(items[0].average_rating, Some(7.0));
    assert_eq!(items[0].last_tasted, Some(date(2026, 7, 2)));
    assert_eq!(items[0].remaining_percentage, 90.0);
    // 30 days elapsed on 2026-08-01
    assert_eq!(items[0].airing_period.as_deref(), Some("1 month"));

    // Item 11: unrated note still counts as a tasting, half the bottle gone
    assert_eq!(items[1].tasting_count, 1);
    assert_eq!(items[1].average_rating, None);
    assert_eq!(items[1].remaining_percentage, 50.0);

    // Item 12: untouched bottle
    assert_eq!(items[2].tasting_count, 0);
    assert_eq!(items[2].average_rating, None);
    assert_eq!(items[2].last_tasted, None);
    assert_eq!(items[2].remaining_percentage, 100.0);
    assert_eq!(items[2].airing_period, None);

    let summary = summarize(&items);
    assert_eq!(summary.total_items, 3);
    assert_eq!(summary.distinct_brands, 2);
    assert_eq!(summary.total_tastings, 3);
    assert_eq!(summary.avg_tastings_per_bottle, 1.0);
    assert_eq!(summary.avg_remaining_percentage, 80.0);
    assert_eq!(summary.rated_items, 1);
    assert_eq!(summary.average_rating, Some(7.0));
    assert_eq!(summary.brand_counts.get("Glenfarclas"), Some(&2));
    assert_eq!(summary.brand_counts.get("Wild Turkey"), Some(&1));
    assert_eq!(summary.type_counts.get("single malt"), Some(&2));
    assert_eq!(summary.type_counts.get("bourbon"), Some(&1));
}

#[test]
fn purchase_cascade_removes_notes_from_aggregation() {
    let today = date(2026, 8, 1);

    let mut whiskeys = HashMap::new();
    whiskeys.insert(1, whiskey(1, "Glenfarclas", "single malt", Some(700)));

    let mut notes = HashMap::new();
    notes.insert(10, vec![note(100, 10, date(2026, 6, 1), Some(9.0), Some(30.0))]);
    notes.insert(11, vec![note(101, 11, date(2026, 6, 2), Some(3.0), Some(30.0))]);

    let before = build_collection_items(
        &[
            purchase(10, 1, date(2026, 3, 1)),
            purchase(11, 1, date(2026, 2, 1)),
        ],
        &whiskeys,
        &notes,
        today,
    );
    assert_eq!(summarize(&before).total_tastings, 2);

    // Purchase 11 deleted: its row and its notes leave the input set
    notes.remove(&11);
    let after = build_collection_items(
        &[purchase(10, 1, date(2026, 3, 1))],
        &whiskeys,
        &notes,
        today,
    );

    assert_eq!(after.len(), 1);
    let summary = summarize(&after);
    assert_eq!(summary.total_tastings, 1);
    assert_eq!(summary.average_rating, Some(9.0));
}

#[test]
fn missing_whiskey_degrades_to_placeholder_and_unknown_buckets() {
    let today = date(2026, 8, 1);

    // Whiskey lookup is empty: the catalog entry was deleted out from
    // under this purchase
    let items = build_collection_items(
        &[purchase(10, 99, date(2026, 3, 1))],
        &HashMap::new(),
        &HashMap::new(),
        today,
    );

    assert_eq!(items.len(), 1);
    assert!(items[0].whiskey.is_none());
    assert_eq!(items[0].remaining_percentage, 100.0);

    let summary = summarize(&items);
    assert_eq!(summary.brand_counts.get("Unknown"), Some(&1));
    assert_eq!(summary.type_counts.get("Unknown"), Some(&1));
}

#[test]
fn empty_collection_summarizes_without_panicking() {
    let items = build_collection_items(&[], &HashMap::new(), &HashMap::new(), date(2026, 8, 1));
    let summary = summarize(&items);

    assert_eq!(summary.total_items, 0);
    assert_eq!(summary.avg_tastings_per_bottle, 0.0);
    assert_eq!(summary.avg_remaining_percentage, 0.0);
    assert_eq!(summary.average_rating, None);
}
