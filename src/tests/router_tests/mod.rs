mod home_tests;
mod results_tests;
mod search_tests;
