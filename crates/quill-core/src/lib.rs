pub mod corpus;
pub mod distance;
pub mod language;
pub mod preprocess;
pub mod types;
