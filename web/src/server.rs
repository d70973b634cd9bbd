use leptos::prelude::*;
use leptos::server;
use shared_types::Holiday;

/// Fetches every holiday record the external source knows for a country.
/// Year filtering happens on the caller's side; the source is not assumed
/// to filter. Transport failure, non-success status, and malformed payload
/// all surface as the same generic load failure.
#[server]
pub async fn fetch_holidays(country: String) -> Result<Vec<Holiday>, ServerFnError> {
    #[cfg(feature = "ssr")]
    {
        let api_key = std::env::var("API_NINJAS_KEY")
            .map_err(|_| ServerFnError::new("API_NINJAS_KEY is not configured"))?;
        let url = format!(
            "https://api.api-ninjas.com/v1/holidays?country={}",
            urlencoding::encode(&country)
        );

        let client = reqwest::Client::new();
        match client.get(&url).header("X-Api-Key", api_key).send().await {
            Ok(response) => {
                if response.status().is_success() {
                    match response.json::<Vec<Holiday>>().await {
                        Ok(holidays) => Ok(holidays),
                        Err(e) => {
                            leptos::logging::log!("Failed to parse holiday payload: {}", e);
                            Err(ServerFnError::new("Failed to load holidays"))
                        }
                    }
                } else {
                    leptos::logging::log!(
                        "Holiday API returned error status: {} for country: {}",
                        response.status(),
                        country
                    );
                    Err(ServerFnError::new("Failed to load holidays"))
                }
            }
            Err(e) => {
                leptos::logging::log!("HTTP request to holiday API failed: {}", e);
                Err(ServerFnError::new("Failed to load holidays"))
            }
        }
    }
    #[cfg(not(feature = "ssr"))]
    {
        let _ = country;
        Ok(vec![])
    }
}
