//! Blocking confirmation before starting a scraper run.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use crate::platform::Platform;

#[must_use]
pub fn scraper_run_prompt(site: &str, mode: &str) -> String {
    format!("Run {site} scraper in {mode} mode?")
}

/// Ask the user whether to run `site` in `mode`; `true` only on acceptance.
pub fn confirm_scraper_run(platform: &dyn Platform, site: &str, mode: &str) -> bool {
    let accepted = platform.confirm(&scraper_run_prompt(site, mode));
    log::debug!("scraper run {site}/{mode} confirmed={accepted}");
    accepted
}
