//! Deterministic sales-record generation for seeding the stores.

use chrono::{Duration as ChronoDuration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::record::SalesRecord;

/// Regions the filter field draws from. "Asia" is the default workload
/// filter value, so every generated batch contains matching records.
pub const REGIONS: [&str; 7] = [
    "Asia",
    "Europe",
    "Sub-Saharan Africa",
    "Middle East and North Africa",
    "Central America and the Caribbean",
    "Australia and Oceania",
    "North America",
];

const COUNTRIES: [&str; 10] = [
    "India",
    "Germany",
    "Kenya",
    "Morocco",
    "Panama",
    "Fiji",
    "Canada",
    "Japan",
    "France",
    "Ghana",
];

const ITEM_TYPES: [&str; 8] = [
    "Baby Food",
    "Cereal",
    "Clothes",
    "Cosmetics",
    "Household",
    "Office Supplies",
    "Snacks",
    "Vegetables",
];

const SALES_CHANNELS: [&str; 2] = ["Online", "Offline"];

const PRIORITIES: [&str; 4] = ["L", "M", "H", "C"];

const SEED: u64 = 12345;

/// Generate `count` sales records, deterministic for a fixed count.
///
/// Monetary fields are internally consistent: revenue, cost, and profit are
/// derived from units sold and the unit price/cost, so aggregate-sum over
/// `total_profit` has a predictable relationship to the generated data.
pub fn generate_records(count: usize) -> Vec<SalesRecord> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let epoch = NaiveDate::from_ymd_opt(2015, 1, 1).expect("valid date");

    (0..count)
        .map(|i| {
            let units_sold = rng.gen_range(10..10_000) as i64;
            let unit_price = f64::from(rng.gen_range(100..70_000)) / 100.0;
            let unit_cost = unit_price * rng.gen_range(0.4..0.9);
            let total_revenue = units_sold as f64 * unit_price;
            let total_cost = units_sold as f64 * unit_cost;
            let order_date = epoch + ChronoDuration::days(rng.gen_range(0..2_000));
            let ship_date = order_date + ChronoDuration::days(rng.gen_range(1..50));

            SalesRecord {
                region: REGIONS[i % REGIONS.len()].to_string(),
                country: COUNTRIES[i % COUNTRIES.len()].to_string(),
                item_type: ITEM_TYPES[i % ITEM_TYPES.len()].to_string(),
                sales_channel: SALES_CHANNELS[i % SALES_CHANNELS.len()].to_string(),
                order_priority: PRIORITIES[i % PRIORITIES.len()].to_string(),
                order_date,
                order_id: 100_000_000 + i as i64,
                ship_date,
                units_sold,
                unit_price,
                unit_cost,
                total_revenue,
                total_cost,
                total_profit: total_revenue - total_cost,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        assert_eq!(generate_records(250).len(), 250);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_records(50), generate_records(50));
    }

    #[test]
    fn regions_come_from_the_known_pool() {
        let records = generate_records(100);
        assert!(records
            .iter()
            .all(|r| REGIONS.contains(&r.region.as_str())));
        // The default workload filters on Asia; a batch must contain matches.
        assert!(records.iter().any(|r| r.region == "Asia"));
    }

    #[test]
    fn monetary_fields_are_consistent() {
        for r in generate_records(100) {
            assert!((r.total_profit - (r.total_revenue - r.total_cost)).abs() < 1e-6);
            assert!(r.total_profit > 0.0);
            assert!(r.ship_date > r.order_date);
        }
    }

    #[test]
    fn order_ids_are_unique() {
        let records = generate_records(100);
        let mut ids: Vec<_> = records.iter().map(|r| r.order_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }
}
