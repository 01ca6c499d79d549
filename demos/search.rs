//! Demonstrates building a search from typed options, signing it, and decoding the results
//! with the default reqwest transport against a mock endpoint.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use yelp_search::{
	client::Client,
	oauth::Credentials,
	search::{BusinessCategory, SearchOption, SortMode},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let search_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/v2/search").query_param_exists("oauth_signature");
			then.status(200).header("content-type", "application/json").body(
				"{\"businesses\":[{\"name\":\"Café de Ruif\",\"rating\":4.0}],\"total\":1}",
			);
		})
		.await;
	let credentials = Credentials::builder()
		.consumer_key("demo-consumer-key")
		.consumer_secret("demo-consumer-secret")
		.token("demo-token")
		.token_secret("demo-token-secret")
		.build()?;
	let client = Client::with_endpoint(&server.url("/v2/search"), credentials)?;
	let options = [
		SearchOption::location("Delft"),
		SearchOption::terms(["beer"]),
		SearchOption::categories([BusinessCategory::Bars]),
		SearchOption::Sort(SortMode::HighestRated),
		SearchOption::Limit(5),
	];
	let found = client.search_options(&options).await?;

	for business in &found.businesses {
		println!("{} ({:.1} stars).", business.name, business.rating);
	}

	search_mock.assert_async().await;

	Ok(())
}
