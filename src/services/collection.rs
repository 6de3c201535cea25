//! Collection aggregation
//!
//! Joins purchases with their whiskey and tasting notes and computes the
//! derived fields the collection view renders: remaining volume, average
//! rating, last-tasted date and the "airing" elapsed-time label, plus
//! collection-wide summary statistics.
//!
//! Everything in this module is pure; the handlers fetch the raw records
//! and hand them over already grouped.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::entities::{purchases, tasting_notes, whiskies};

/// Bottle volume assumed when the catalog entry has none (or zero).
/// Keeps the remaining-percentage math away from division by zero.
const DEFAULT_BOTTLE_VOLUME_ML: f64 = 100.0;

/// One purchase, display-ready: the whiskey it references (when still in
/// the catalog) and the statistics derived from its tasting notes.
#[derive(Debug, Clone)]
pub struct CollectionItem {
    pub purchase: purchases::Model,
    /// None when the referenced whiskey is missing from the lookup;
    /// the view falls back to a placeholder, this is not an error.
    pub whiskey: Option<whiskies::Model>,
    pub tasting_count: usize,
    /// None when no note carries a rating - "unrated" is not "rated zero"
    pub average_rating: Option<f64>,
    pub last_tasted: Option<NaiveDate>,
    pub total_consumed_ml: f64,
    /// Clamped to [0, 100]
    pub remaining_percentage: f64,
    pub airing_period: Option<String>,
}

/// Collection-wide statistics for the summary panel.
#[derive(Debug, Clone, Default)]
pub struct CollectionSummary {
    pub total_items: usize,
    pub distinct_brands: usize,
    pub total_tastings: usize,
    pub avg_tastings_per_bottle: f64,
    pub avg_remaining_percentage: f64,
    pub rated_items: usize,
    /// None when no item has a rating
    pub average_rating: Option<f64>,
    pub brand_counts: HashMap<String, usize>,
    pub type_counts: HashMap<String, usize>,
}

/// Build display-ready collection items from raw records.
///
/// Output order matches the input purchase order; callers sort purchases
/// (date descending) before calling. A purchase id missing from
/// `notes_by_purchase` is treated as "no tastings yet".
pub fn build_collection_items(
    purchases: &[purchases::Model],
    whiskey_by_id: &HashMap<i32, whiskies::Model>,
    notes_by_purchase: &HashMap<i32, Vec<tasting_notes::Model>>,
    today: NaiveDate,
) -> Vec<CollectionItem> {
    purchases
        .iter()
        .map(|purchase| {
            let whiskey = whiskey_by_id.get(&purchase.whiskey_id).cloned();
            if whiskey.is_none() {
                tracing::warn!(
                    purchase_id = purchase.id,
                    whiskey_id = purchase.whiskey_id,
                    "Purchase references a whiskey missing from the catalog"
                );
            }

            let empty: &[tasting_notes::Model] = &[];
            let notes = notes_by_purchase
                .get(&purchase.id)
                .map(|v| v.as_slice())
                .unwrap_or(empty);

            let tasting_count = notes.len();

            let ratings: Vec<f64> = notes.iter().filter_map(|n| n.rating).collect();
            let average_rating = if ratings.is_empty() {
                None
            } else {
                Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
            };

            let last_tasted = notes.iter().map(|n| n.tasting_date).max();

            let total_consumed_ml: f64 =
                notes.iter().map(|n| n.amount_consumed_ml.unwrap_or(0.0)).sum();

            let bottle_volume = whiskey
                .as_ref()
                .and_then(|w| w.volume_ml)
                .filter(|v| *v > 0)
                .map(|v| v as f64)
                .unwrap_or(DEFAULT_BOTTLE_VOLUME_ML);

            let remaining_percentage =
                ((bottle_volume - total_consumed_ml) / bottle_volume * 100.0).clamp(0.0, 100.0);

            let airing_period = airing_period(last_tasted, today);

            CollectionItem {
                purchase: purchase.clone(),
                whiskey,
                tasting_count,
                average_rating,
                last_tasted,
                total_consumed_ml,
                remaining_percentage,
                airing_period,
            }
        })
        .collect()
}

/// Compute collection-wide summary statistics.
///
/// Every ratio guards the zero denominator by returning 0, so an empty
/// collection summarizes to all-zero rather than failing.
pub fn summarize(items: &[CollectionItem]) -> CollectionSummary {
    let total_items = items.len();

    let mut brand_counts: HashMap<String, usize> = HashMap::new();
    let mut type_counts: HashMap<String, usize> = HashMap::new();

    for item in items {
        let brand = item
            .whiskey
            .as_ref()
            .and_then(|w| w.brand.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        *brand_counts.entry(brand).or_insert(0) += 1;

        let whiskey_type = item
            .whiskey
            .as_ref()
            .and_then(|w| w.whiskey_type.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        *type_counts.entry(whiskey_type).or_insert(0) += 1;
    }

    let total_tastings: usize = items.iter().map(|i| i.tasting_count).sum();

    let avg_tastings_per_bottle = if total_items == 0 {
        0.0
    } else {
        total_tastings as f64 / total_items as f64
    };

    let avg_remaining_percentage = if total_items == 0 {
        0.0
    } else {
        items.iter().map(|i| i.remaining_percentage).sum::<f64>() / total_items as f64
    };

    let rated: Vec<f64> = items.iter().filter_map(|i| i.average_rating).collect();
    let rated_items = rated.len();
    let average_rating = if rated.is_empty() {
        None
    } else {
        Some(rated.iter().sum::<f64>() / rated.len() as f64)
    };

    CollectionSummary {
        total_items,
        distinct_brands: brand_counts.len(),
        total_tastings,
        avg_tastings_per_bottle,
        avg_remaining_percentage,
        rated_items,
        average_rating,
        brand_counts,
        type_counts,
    }
}

/// Bucket elapsed whole days since the last tasting into a display label.
///
/// Floor division throughout: 30-59 days reads "1 month", 365-729 days
/// reads "1 year". Display text, not a duration calculation.
pub fn airing_period(last_tasted: Option<NaiveDate>, today: NaiveDate) -> Option<String> {
    let last = last_tasted?;
    let days = (today - last).num_days().max(0);

    let label = if days == 0 {
        "today".to_string()
    } else if days == 1 {
        "1 day".to_string()
    } else if days < 30 {
        format!("{} days", days)
    } else if days < 365 {
        let months = days / 30;
        if months == 1 {
            "1 month".to_string()
        } else {
            format!("{} months", months)
        }
    } else {
        let years = days / 365;
        if years == 1 {
            "1 year".to_string()
        } else {
            format!("{} years", years)
        }
    };

    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whiskey(id: i32, volume_ml: Option<i32>) -> whiskies::Model {
        whiskies::Model {
            id,
            name: format!("Whiskey {}", id),
            name_en: None,
            name_ko: None,
            brand: Some("Glen Test".to_string()),
            whiskey_type: Some("single malt".to_string()),
            age_years: Some(12),
            volume_ml,
            abv: Some(43.0),
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

    fn purchase(id: i32, whiskey_id: i32) -> purchases::Model {
        purchases::Model {
            id,
            whiskey_id,
            purchase_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
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

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
    }

    #[test]
    fn test_average_rating_mean_of_rated_notes() {
        let d = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let purchases = vec![purchase(1, 10)];
        let mut whiskeys = HashMap::new();
        whiskeys.insert(10, whiskey(10, Some(700)));
        let mut notes = HashMap::new();
        notes.insert(
            1,
            vec![
                note(1, 1, d, Some(6.0), Some(30.0)),
                note(2, 1, d, Some(8.0), Some(30.0)),
                note(3, 1, d, None, Some(30.0)),
            ],
        );

        let items = build_collection_items(&purchases, &whiskeys, &notes, today());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].tasting_count, 3);
        assert_eq!(items[0].average_rating, Some(7.0));
        assert_eq!(items[0].total_consumed_ml, 90.0);
    }

    #[test]
    fn test_average_rating_none_when_no_note_is_rated() {
        let d = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let purchases = vec![purchase(1, 10)];
        let mut whiskeys = HashMap::new();
        whiskeys.insert(10, whiskey(10, Some(700)));
        let mut notes = HashMap::new();
        notes.insert(1, vec![note(1, 1, d, None, Some(30.0))]);

        let items = build_collection_items(&purchases, &whiskeys, &notes, today());
        assert_eq!(items[0].average_rating, None);
        assert_eq!(items[0].tasting_count, 1);
    }

    #[test]
    fn test_remaining_percentage_in_range() {
        let d = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let purchases = vec![purchase(1, 10)];
        let mut whiskeys = HashMap::new();
        whiskeys.insert(10, whiskey(10, Some(700)));
        let mut notes = HashMap::new();
        notes.insert(1, vec![note(1, 1, d, None, Some(175.0))]);

        let items = build_collection_items(&purchases, &whiskeys, &notes, today());
        assert_eq!(items[0].remaining_percentage, 75.0);
        assert!(items[0].remaining_percentage >= 0.0);
        assert!(items[0].remaining_percentage <= 100.0);
    }

    #[test]
    fn test_remaining_percentage_clamps_on_over_consumption() {
        let d = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let purchases = vec![purchase(1, 10)];
        let mut whiskeys = HashMap::new();
        whiskeys.insert(10, whiskey(10, Some(700)));
        let mut notes = HashMap::new();
        // Logged consumption exceeds bottle volume
        notes.insert(1, vec![note(1, 1, d, None, Some(900.0))]);

        let items = build_collection_items(&purchases, &whiskeys, &notes, today());
        assert_eq!(items[0].remaining_percentage, 0.0);
    }

    #[test]
    fn test_missing_or_zero_volume_uses_default() {
        let d = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let purchases = vec![purchase(1, 10), purchase(2, 11)];
        let mut whiskeys = HashMap::new();
        whiskeys.insert(10, whiskey(10, None));
        whiskeys.insert(11, whiskey(11, Some(0)));
        let mut notes = HashMap::new();
        notes.insert(1, vec![note(1, 1, d, None, Some(50.0))]);
        notes.insert(2, vec![note(2, 2, d, None, Some(50.0))]);

        let items = build_collection_items(&purchases, &whiskeys, &notes, today());
        // Default volume 100, 50 consumed
        assert_eq!(items[0].remaining_percentage, 50.0);
        assert_eq!(items[1].remaining_percentage, 50.0);
    }

    #[test]
    fn test_missing_whiskey_yields_placeholder_item() {
        let purchases = vec![purchase(1, 999)];
        let whiskeys = HashMap::new();
        let notes = HashMap::new();

        let items = build_collection_items(&purchases, &whiskeys, &notes, today());
        assert_eq!(items.len(), 1);
        assert!(items[0].whiskey.is_none());
        assert_eq!(items[0].tasting_count, 0);
        assert_eq!(items[0].remaining_percentage, 100.0);
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let purchases = vec![purchase(3, 10), purchase(1, 10), purchase(2, 10)];
        let mut whiskeys = HashMap::new();
        whiskeys.insert(10, whiskey(10, Some(700)));
        let notes = HashMap::new();

        let items = build_collection_items(&purchases, &whiskeys, &notes, today());
        let ids: Vec<i32> = items.iter().map(|i| i.purchase.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_deleted_purchase_notes_disappear_from_aggregation() {
        let d = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let mut whiskeys = HashMap::new();
        whiskeys.insert(10, whiskey(10, Some(700)));
        let mut notes = HashMap::new();
        notes.insert(1, vec![note(1, 1, d, Some(9.0), Some(30.0))]);
        notes.insert(2, vec![note(2, 2, d, Some(5.0), Some(30.0))]);

        // Purchase 2 deleted: its notes are gone from the input set
        let purchases = vec![purchase(1, 10)];
        notes.remove(&2);

        let items = build_collection_items(&purchases, &whiskeys, &notes, today());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].purchase.id, 1);
        let summary = summarize(&items);
        assert_eq!(summary.total_tastings, 1);
        assert_eq!(summary.average_rating, Some(9.0));
    }

    #[test]
    fn test_summarize_empty_is_all_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.distinct_brands, 0);
        assert_eq!(summary.total_tastings, 0);
        assert_eq!(summary.avg_tastings_per_bottle, 0.0);
        assert_eq!(summary.avg_remaining_percentage, 0.0);
        assert_eq!(summary.rated_items, 0);
        assert_eq!(summary.average_rating, None);
        assert!(summary.brand_counts.is_empty());
        assert!(summary.type_counts.is_empty());
    }

    #[test]
    fn test_summarize_buckets_missing_brand_and_type_as_unknown() {
        let d = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let mut unbranded = whiskey(10, Some(700));
        unbranded.brand = None;
        unbranded.whiskey_type = None;

        let purchases = vec![purchase(1, 10), purchase(2, 11)];
        let mut whiskeys = HashMap::new();
        whiskeys.insert(10, unbranded);
        whiskeys.insert(11, whiskey(11, Some(700)));
        let mut notes = HashMap::new();
        notes.insert(1, vec![note(1, 1, d, Some(7.0), None)]);

        let items = build_collection_items(&purchases, &whiskeys, &notes, today());
        let summary = summarize(&items);

        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.brand_counts.get("Unknown"), Some(&1));
        assert_eq!(summary.brand_counts.get("Glen Test"), Some(&1));
        assert_eq!(summary.type_counts.get("Unknown"), Some(&1));
        assert_eq!(summary.type_counts.get("single malt"), Some(&1));
        assert_eq!(summary.distinct_brands, 2);
        assert_eq!(summary.avg_tastings_per_bottle, 0.5);
        assert_eq!(summary.rated_items, 1);
        assert_eq!(summary.average_rating, Some(7.0));
    }

    #[test]
    fn test_airing_period_buckets() {
        let base = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let at = |days: i64| Some(base - chrono::Duration::days(days));

        assert_eq!(airing_period(at(0), base), Some("today".to_string()));
        assert_eq!(airing_period(at(1), base), Some("1 day".to_string()));
        assert_eq!(airing_period(at(29), base), Some("29 days".to_string()));
        assert_eq!(airing_period(at(30), base), Some("1 month".to_string()));
        assert_eq!(airing_period(at(59), base), Some("1 month".to_string()));
        assert_eq!(airing_period(at(60), base), Some("2 months".to_string()));
        assert_eq!(airing_period(at(364), base), Some("12 months".to_string()));
        assert_eq!(airing_period(at(400), base), Some("1 year".to_string()));
        assert_eq!(airing_period(at(800), base), Some("2 years".to_string()));
        assert_eq!(airing_period(None, base), None);
    }

    #[test]
    fn test_last_tasted_is_max_date() {
        let purchases = vec![purchase(1, 10)];
        let mut whiskeys = HashMap::new();
        whiskeys.insert(10, whiskey(10, Some(700)));
        let d1 = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 4, 10).unwrap();
        let d3 = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        let mut notes = HashMap::new();
        notes.insert(
            1,
            vec![
                note(1, 1, d1, None, None),
                note(2, 1, d2, None, None),
                note(3, 1, d3, None, None),
            ],
        );

        let items = build_collection_items(&purchases, &whiskeys, &notes, today());
        assert_eq!(items[0].last_tasted, Some(d2));
    }
}
