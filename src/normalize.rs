//! Flattens raw places API payloads into table rows.
//!
//! Nothing here can fail: missing or wrongly typed fields turn into `None`.

use serde_json::Value;

use crate::models::place::{Place, SearchResponse};
use crate::models::row::{PlaceDetailRow, SearchRow};

/// Highest tier the `$` symbol scale goes up to.
pub const MAX_PRICE_SYMBOLS: i64 = 4;

/// One row per entry of `payload.results`, in response order.
pub fn normalize_search_results(payload: &Value) -> Vec<SearchRow> {
    SearchResponse::from_value(payload)
        .places()
        .map(|place| search_row(&place))
        .collect()
}

pub fn normalize_detail(payload: &Value) -> PlaceDetailRow {
    let place = Place::from_value(payload);
    let base = search_row(&place);

    PlaceDetailRow {
        fsq_place_id: base.fsq_place_id,
        name: base.name,
        category: base.category,
        address: base.address,
        locality: base.locality,
        region: base.region,
        postcode: base.postcode,
        country: base.country,
        distance_m: base.distance_m,
        latitude: base.latitude,
        longitude: base.longitude,
        rating: place.rating,
        price_tier: place.price,
        min_price: min_price_symbol(place.price),
        open_now: place.open_now(),
        hours: place.hours_display().map(str::to_string),
        tel: place.tel.clone(),
        website: place.website.clone(),
    }
}

/// `$` repeated once per price tier, capped at four. Tiers below one have no symbol.
pub fn min_price_symbol(price_tier: Option<i64>) -> Option<String> {
    match price_tier {
        Some(tier) if tier > 0 => Some("$".repeat(tier.min(MAX_PRICE_SYMBOLS) as usize)),
        _ => None,
    }
}

fn search_row(place: &Place) -> SearchRow {
    SearchRow {
        fsq_place_id: place.id().map(str::to_string),
        name: place.name.clone(),
        category: place.category_name().map(str::to_string),
        address: place.address().map(str::to_string),
        locality: place.locality().map(str::to_string),
        region: place.region().map(str::to_string),
        postcode: place.postcode().map(str::to_string),
        country: place.country().map(str::to_string),
        distance_m: place.distance_m(),
        latitude: place.latitude(),
        longitude: place.longitude(),
    }
}
