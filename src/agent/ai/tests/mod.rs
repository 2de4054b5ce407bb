
mod move_filter_tests;
