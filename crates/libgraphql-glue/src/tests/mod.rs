mod config_tests;
mod test_utils;
