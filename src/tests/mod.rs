mod district_tests;
mod extract_tests;
mod spreadsheet_tests;
mod utils;
