pub mod speech_api_repository;
pub mod tts_repository;

pub use speech_api_repository::SpeechApiRepository;
pub use tts_repository::{TtsRepository, TtsRepositoryError};
