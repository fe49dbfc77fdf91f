#[derive(Clone)]
pub struct AppConfig {
    pub shopify_store: String,
    pub shopify_access_token: String,
    pub shopify_api_version: String,
    pub algolia_app_id: String,
    pub algolia_admin_api_key: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub parallel_width: usize,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("shopify_store", &self.shopify_store)
            .field("shopify_access_token", &"[redacted]")
            .field("shopify_api_version", &self.shopify_api_version)
            .field("algolia_app_id", &self.algolia_app_id)
            .field("algolia_admin_api_key", &"[redacted]")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("parallel_width", &self.parallel_width)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl AppConfig {
    /// Names of the credential variables that were absent or empty at load time.
    ///
    /// Absence is not a load error: the catalog or index API rejects the first
    /// request instead. Callers log these so the eventual auth failure is easy
    /// to trace back.
    #[must_use]
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            ("SHOPIFY_STORE", &self.shopify_store),
            ("SHOPIFY_ACCESS_TOKEN", &self.shopify_access_token),
            ("ALGOLIA_APP_ID", &self.algolia_app_id),
            ("ALGOLIA_ADMIN_API_KEY", &self.algolia_admin_api_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
