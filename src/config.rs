use serde::Deserialize;

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30u64
}

fn default_catalog_endpoint() -> String {
    "https://api.music.apple.com".to_string()
}

fn default_catalog_storefront() -> String {
    "us".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CatalogCredentials {
    #[serde(
        rename = "catalog_endpoint",
        default = "default_catalog_endpoint"
    )]
    pub(crate) endpoint: String,
    #[serde(
        rename = "catalog_storefront",
        default = "default_catalog_storefront"
    )]
    pub(crate) storefront: String,
    #[serde(rename = "catalog_developer_token")]
    pub(crate) developer_token: String,
    #[serde(rename = "catalog_music_user_token")]
    pub(crate) music_user_token: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Config {
    #[serde(default = "default_bind_address")]
    pub(crate) bind_address: String,
    #[serde(default = "default_shutdown_timeout")]
    pub(crate) shutdown_timeout: u64,
    #[serde(default)]
    pub(crate) song_list_file: Option<String>,
    #[serde(flatten)]
    pub(crate) catalog: CatalogCredentials,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        match envy::from_env::<Self>() {
            Ok(config) => config,
            Err(error) => panic!("Missing environment variable: {:#?}", error),
        }
    }
}
