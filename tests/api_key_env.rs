// Lives in its own test binary: it is the only test that touches FOURSQUARE_API_KEY.

use restaurant_client::client::{ClientConfig, PlacesClient};
use restaurant_client::error::{PlacesError, API_KEY_ENV};

#[test]
fn api_key_resolves_from_explicit_value_then_environment() {
    std::env::remove_var(API_KEY_ENV);
    assert!(matches!(
        PlacesClient::from_env(),
        Err(PlacesError::AuthenticationMissing)
    ));

    std::env::set_var(API_KEY_ENV, "");
    assert!(matches!(
        PlacesClient::from_env(),
        Err(PlacesError::AuthenticationMissing)
    ));

    std::env::set_var(API_KEY_ENV, "from-env");
    assert!(PlacesClient::from_env().is_ok());

    // An explicit key is used as given, even when it is blank.
    assert!(matches!(
        PlacesClient::new(ClientConfig::default().with_api_key("")),
        Err(PlacesError::AuthenticationMissing)
    ));
    assert!(PlacesClient::new(ClientConfig::default().with_api_key("explicit")).is_ok());

    std::env::remove_var(API_KEY_ENV);
}
