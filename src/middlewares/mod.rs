pub mod response_formatter;
