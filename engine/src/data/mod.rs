// Parsing of console input into the values the algorithms take
pub mod input_parser;
