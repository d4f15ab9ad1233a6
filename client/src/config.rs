//! Backend-as-a-service connection settings.
//!
//! The WASM bundle has no process environment, so values are baked in at
//! build time from `TIMELINE_BACKEND_URL`, `TIMELINE_BACKEND_APP_ID` and
//! `TIMELINE_BACKEND_API_KEY`, falling back to the public demo application.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "https://api.backendless.com";
pub const DEFAULT_APP_ID: &str = "D515D982-A533-4F3E-B0F5-E70936FCD98E";
pub const DEFAULT_API_KEY: &str = "7D7139F7-370B-441B-BDDA-8062A5F71153";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub app_id: String,
    pub api_key: String,
}

impl BackendConfig {
    /// Config captured from the build environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TIMELINE_BACKEND_URL"),
            option_env!("TIMELINE_BACKEND_APP_ID"),
            option_env!("TIMELINE_BACKEND_API_KEY"),
        )
    }

    /// Apply overrides on top of the defaults. Blank values count as absent.
    #[must_use]
    pub fn from_values(base_url: Option<&str>, app_id: Option<&str>, api_key: Option<&str>) -> Self {
        let pick = |value: Option<&str>, default: &str| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_owned()
        };
        Self {
            base_url: pick(base_url, DEFAULT_BACKEND_URL).trim_end_matches('/').to_owned(),
            app_id: pick(app_id, DEFAULT_APP_ID),
            api_key: pick(api_key, DEFAULT_API_KEY),
        }
    }

    /// Absolute URL for an application-scoped REST path such as `users/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}/{}", self.base_url, self.app_id, self.api_key, path.trim_start_matches('/'))
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
