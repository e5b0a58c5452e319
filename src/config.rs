const DEFAULT_API_URL: &str = "http://localhost:4000";

/// Base URL of the REST backend, baked in at build time through the
/// `API_URL` environment setting (Trunk forwards it to rustc). Falls back
/// to the local development default.
pub fn api_base_url() -> &'static str {
    option_env!("API_URL").unwrap_or(DEFAULT_API_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }

    #[test]
    fn falls_back_to_the_local_default() {
        if option_env!("API_URL").is_none() {
            assert_eq!(api_base_url(), "http://localhost:4000");
        }
    }
}
