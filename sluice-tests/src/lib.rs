mod binding;
mod request;
mod rewrites;
mod scanning;

use binding::binding;
use log::LevelFilter;
use request::request;
use rewrites::rewrites;
use scanning::scanning;
use sluice::{PrepareOptions, ScanPolicy};
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Runs every shared scenario with `options`.
pub fn execute_tests(options: &PrepareOptions) {
    scanning(options);
    rewrites(options);
    binding(options);
    request(options);
}

/// Same as [`execute_tests`] with each scan policy, keeping the rewrites of `options`.
pub fn execute_tests_all_policies(options: &PrepareOptions) {
    for policy in [ScanPolicy::Strict, ScanPolicy::Lenient] {
        log::info!("Running the shared scenarios with the {} scan policy", policy);
        execute_tests(&options.clone().with_scan_policy(policy));
    }
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
