use gloo_storage::{LocalStorage, Storage};

const DEFAULT_API_URL: &str = "https://zl2pcttxj4.execute-api.eu-central-1.amazonaws.com/dev";
const API_URL_STORAGE_KEY: &str = "classifier_api_url";

/// Where the classify endpoint lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolves the base URL from local storage, then the build environment,
    /// then the built-in default.
    pub fn load() -> Self {
        let stored = LocalStorage::raw()
            .get_item(API_URL_STORAGE_KEY)
            .ok()
            .flatten();
        if stored.is_some() {
            log::info!("Using API URL override from localStorage[{}]", API_URL_STORAGE_KEY);
        }
        Self::resolve(stored.as_deref(), option_env!("CLASSIFIER_API_URL"))
    }

    fn resolve(stored: Option<&str>, build_env: Option<&str>) -> Self {
        [stored, build_env]
            .into_iter()
            .flatten()
            .find(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_else(|| Self::new(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn classify_url(&self) -> String {
        format!("{}/classify", self.base_url)
    }
}
