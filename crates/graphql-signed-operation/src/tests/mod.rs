mod config_tests;
mod utils;
mod verifier_tests;
