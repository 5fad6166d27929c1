pub mod tab_parser;
pub mod token_parser;
