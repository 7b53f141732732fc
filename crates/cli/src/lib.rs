pub mod notation;
pub mod random;
pub mod suggestion;

pub use suggestion::{
    parse_suggested_call, vet_suggestion, Suggestion, SuggestionRequest, SuggestionResponse,
};
