mod endpoint_stats_tests;
mod run_tests;
mod types_tests;
