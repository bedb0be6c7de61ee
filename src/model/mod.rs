/// Query parameter types for the bib endpoints
pub mod requests;
