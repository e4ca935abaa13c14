use serde::Deserialize;
use serde_json::{Map, Number, Value};
use serde_with::{serde_as, DefaultOnError};

/// Envelope of a `/places/search` response.
///
/// Entries are kept as raw JSON so that one malformed result can't take
/// the others down with it; each one goes through [`Place::from_value`].
#[serde_as]
#[derive(Clone, Deserialize, Debug, Default)]
pub struct SearchResponse {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub results: Option<Vec<Value>>,
}

impl SearchResponse {
    pub fn from_value(payload: &Value) -> Self {
        SearchResponse::deserialize(payload).unwrap_or_default()
    }

    pub fn places(&self) -> impl Iterator<Item = Place> + '_ {
        self.results
            .iter()
            .flatten()
            .map(Place::from_value)
    }
}

/// A place as the API describes it, either as a search hit or as a detail record.
///
/// Every field is optional and tolerates the wrong JSON type by falling back
/// to `None`, so building one never fails.
#[serde_as]
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Place {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub fsq_place_id: Option<String>,
    /// Identifier used by the v3 API, still returned by some endpoints.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub fsq_id: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: Option<String>,
    /// Malformed entries become empty categories in place, so positions are kept.
    #[serde_as(as = "DefaultOnError<Option<Vec<DefaultOnError>>>")]
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub location: Option<Location>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub geocodes: Option<Geocodes>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub distance: Option<Number>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub price: Option<i64>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub hours: Option<Map<String, Value>>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub tel: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub website: Option<String>,
}

#[serde_as]
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Category {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub name: Option<String>,
}

#[serde_as]
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Location {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub address: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub locality: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub region: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub country: Option<String>,
}

#[serde_as]
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Geocodes {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub main: Option<LatLng>,
}

#[serde_as]
#[derive(Clone, Deserialize, Debug, Default)]
pub struct LatLng {
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Place {
    /// Anything that isn't a JSON object comes back as an empty place.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Place::default();
        }
        Place::deserialize(value).unwrap_or_default()
    }

    /// `fsq_place_id`, or the legacy `fsq_id` when the former is missing or empty.
    pub fn id(&self) -> Option<&str> {
        non_empty(self.fsq_place_id.as_deref()).or_else(|| non_empty(self.fsq_id.as_deref()))
    }

    pub fn category_name(&self) -> Option<&str> {
        self.categories
            .as_ref()
            .and_then(|categories| categories.first())
            .and_then(|category| category.name.as_deref())
    }

    /// Distance in whole meters; fractional values are rounded.
    pub fn distance_m(&self) -> Option<i64> {
        let distance = self.distance.as_ref()?;
        distance.as_i64().or_else(|| {
            distance
                .as_f64()
                .filter(|meters| meters.is_finite() && meters.abs() < i64::MAX as f64)
                .map(|meters| meters.round() as i64)
        })
    }

    pub fn address(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.address.as_deref())
    }

    pub fn locality(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.locality.as_deref())
    }

    pub fn region(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.region.as_deref())
    }

    pub fn postcode(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.postcode.as_deref())
    }

    pub fn country(&self) -> Option<&str> {
        self.location.as_ref().and_then(|l| l.country.as_deref())
    }

    fn main_geocode(&self) -> Option<&LatLng> {
        self.geocodes.as_ref().and_then(|g| g.main.as_ref())
    }

    pub fn latitude(&self) -> Option<f64> {
        self.main_geocode().and_then(|g| g.latitude)
    }

    pub fn longitude(&self) -> Option<f64> {
        self.main_geocode().and_then(|g| g.longitude)
    }

    /// `hours.open_now`; stays `None` unless the API said yes or no.
    pub fn open_now(&self) -> Option<bool> {
        self.hours
            .as_ref()
            .and_then(|hours| hours.get("open_now"))
            .and_then(Value::as_bool)
    }

    pub fn hours_display(&self) -> Option<&str> {
        self.hours
            .as_ref()
            .and_then(|hours| hours.get("display"))
            .and_then(Value::as_str)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_values_become_empty_places() {
        for value in [json!(null), json!("abc"), json!(42), json!([1, 2])] {
            let place = Place::from_value(&value);
            assert!(place.id().is_none());
            assert!(place.name.is_none());
        }
    }

    #[test]
    fn wrongly_typed_fields_only_drop_themselves() {
        let place = Place::from_value(&json!({
            "fsq_place_id": 17,
            "name": "Noodle Bar",
            "location": "somewhere",
            "geocodes": {"main": {"latitude": "north", "longitude": -84.3}},
            "distance": "far"
        }));

        assert!(place.id().is_none());
        assert_eq!(place.name.as_deref(), Some("Noodle Bar"));
        assert!(place.address().is_none());
        assert!(place.latitude().is_none());
        assert_eq!(place.longitude(), Some(-84.3));
        assert!(place.distance_m().is_none());
    }

    #[test]
    fn empty_primary_id_falls_back_to_legacy_id() {
        let place = Place::from_value(&json!({"fsq_place_id": "", "fsq_id": "legacy"}));
        assert_eq!(place.id(), Some("legacy"));
    }

    #[test]
    fn category_is_first_named_entry() {
        let place = Place::from_value(&json!({
            "categories": [{"name": "Ramen"}, {"name": "Japanese"}]
        }));
        assert_eq!(place.category_name(), Some("Ramen"));

        let place = Place::from_value(&json!({"categories": []}));
        assert!(place.category_name().is_none());
    }

    #[test]
    fn bad_category_entries_do_not_hide_the_first_one() {
        let place = Place::from_value(&json!({"categories": [{"name": "Ramen"}, "bad"]}));
        assert_eq!(place.category_name(), Some("Ramen"));

        let place = Place::from_value(&json!({"categories": ["bad", {"name": "Ramen"}]}));
        assert!(place.category_name().is_none());
    }

    #[test]
    fn float_distances_are_whole_meters() {
        let distance = |value: Value| Place::from_value(&json!({"distance": value})).distance_m();
        assert_eq!(distance(json!(120)), Some(120));
        assert_eq!(distance(json!(120.0)), Some(120));
        assert_eq!(distance(json!(120.6)), Some(121));
        assert_eq!(distance(json!(null)), None);
    }

    #[test]
    fn search_response_tolerates_missing_or_odd_results() {
        assert_eq!(SearchResponse::from_value(&json!({})).places().count(), 0);
        assert_eq!(
            SearchResponse::from_value(&json!({"results": null})).places().count(),
            0
        );
        assert_eq!(
            SearchResponse::from_value(&json!({"results": "nope"}))
                .places()
                .count(),
            0
        );
        assert_eq!(SearchResponse::from_value(&json!([])).places().count(), 0);
    }
}
