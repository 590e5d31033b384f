// Adapters layer: reqwest-backed clients for the external collaborators
// (weather API, ML prediction microservice, chat completion providers).

pub mod chat;
pub mod ml;
pub mod weather;
