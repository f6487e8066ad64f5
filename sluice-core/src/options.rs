use crate::{Context, Error, Result, Rewrites, ScanPolicy, truncate_long};
use std::env;
use url::Url;

/// How a [`crate::PreparedQuery`] is built from the raw SQL.
#[derive(Default, Debug, Clone)]
pub struct PrepareOptions {
    pub scan_policy: ScanPolicy,
    pub rewrites: Rewrites,
}

impl PrepareOptions {
    pub fn with_scan_policy(mut self, policy: ScanPolicy) -> Self {
        self.scan_policy = policy;
        self
    }

    pub fn with_rewrites(mut self, rewrites: Rewrites) -> Self {
        self.rewrites = rewrites;
        self
    }

    /// Read the options from the query parameters of a connection url.
    ///
    /// * `scan_policy` (or `SLUICE_SCAN_POLICY`): `strict` or `lenient`.
    /// * `rewrites` (or `SLUICE_REWRITES`): `default` or `none`.
    ///
    /// Parameters missing from both the url and the environment keep their default.
    pub fn from_url(url: &str) -> Result<Self> {
        let context = || {
            format!(
                "While reading the prepare options from `{}`",
                truncate_long!(url)
            )
        };
        let url = Url::parse(url).with_context(context)?;
        let take_url_param = |key: &str, env_var: &str| {
            url.query_pairs()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.into_owned())
                .or_else(|| env::var(env_var).ok())
        };
        let mut options = PrepareOptions::default();
        if let Some(policy) = take_url_param("scan_policy", "SLUICE_SCAN_POLICY") {
            options.scan_policy = policy.parse().with_context(context)?;
        }
        if let Some(rewrites) = take_url_param("rewrites", "SLUICE_REWRITES") {
            options.rewrites = match rewrites.trim().to_ascii_lowercase().as_str() {
                "default" => Rewrites::default(),
                "none" => Rewrites::none(),
                _ => {
                    let error = Error::msg(format!(
                        "Unknown rewrites `{rewrites}`, expected `default` or `none`"
                    ))
                    .context(context());
                    log::error!("{:#}", error);
                    return Err(error);
                }
            };
        }
        Ok(options)
    }
}
