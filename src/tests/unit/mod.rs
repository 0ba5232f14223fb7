mod catalog_tests;
mod client_tests;
