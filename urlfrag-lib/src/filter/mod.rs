mod regex_filter;

pub use regex_filter::RegexFilter;
