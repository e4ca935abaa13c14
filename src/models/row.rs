use serde::Serialize;

/// A flat record that can be printed as one line of a table.
pub trait TableRow {
    fn headers() -> &'static [&'static str];

    /// One cell per header, in header order; nulls render as empty cells.
    fn cells(&self) -> Vec<String>;
}

#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct SearchRow {
    pub fsq_place_id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub distance_m: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Everything a search row has, plus what only the detail endpoint returns.
#[derive(Clone, Serialize, Debug, Default, PartialEq)]
pub struct PlaceDetailRow {
    pub fsq_place_id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub locality: Option<String>,
    pub region: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub distance_m: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: Option<f64>,
    pub price_tier: Option<i64>,
    pub min_price: Option<String>,
    pub open_now: Option<bool>,
    pub hours: Option<String>,
    pub tel: Option<String>,
    pub website: Option<String>,
}

const SEARCH_HEADERS: [&str; 11] = [
    "fsq_place_id",
    "name",
    "category",
    "address",
    "locality",
    "region",
    "postcode",
    "country",
    "distance_m",
    "latitude",
    "longitude",
];

const DETAIL_HEADERS: [&str; 18] = [
    "fsq_place_id",
    "name",
    "category",
    "address",
    "locality",
    "region",
    "postcode",
    "country",
    "distance_m",
    "latitude",
    "longitude",
    "rating",
    "price_tier",
    "min_price",
    "open_now",
    "hours",
    "tel",
    "website",
];

fn cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl TableRow for SearchRow {
    fn headers() -> &'static [&'static str] {
        &SEARCH_HEADERS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            cell(&self.fsq_place_id),
            cell(&self.name),
            cell(&self.category),
            cell(&self.address),
            cell(&self.locality),
            cell(&self.region),
            cell(&self.postcode),
            cell(&self.country),
            cell(&self.distance_m),
            cell(&self.latitude),
            cell(&self.longitude),
        ]
    }
}

impl TableRow for PlaceDetailRow {
    fn headers() -> &'static [&'static str] {
        &DETAIL_HEADERS
    }

    fn cells(&self) -> Vec<String> {
        vec![
            cell(&self.fsq_place_id),
            cell(&self.name),
            cell(&self.category),
            cell(&self.address),
            cell(&self.locality),
            cell(&self.region),
            cell(&self.postcode),
            cell(&self.country),
            cell(&self.distance_m),
            cell(&self.latitude),
            cell(&self.longitude),
            cell(&self.rating),
            cell(&self.price_tier),
            cell(&self.min_price),
            cell(&self.open_now),
            cell(&self.hours),
            cell(&self.tel),
            cell(&self.website),
        ]
    }
}
