// ATS analysis: tokenization, keyword coverage scoring, request policy, handlers.
// The scorer itself knows nothing about HTTP; handlers own validation and mapping.

pub mod coverage;
pub mod handlers;
pub mod models;
pub mod policy;
pub mod tokenizer;
