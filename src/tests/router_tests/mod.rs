mod api_tests;
mod home_tests;
