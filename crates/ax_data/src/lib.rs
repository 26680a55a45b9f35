pub mod export;
pub mod loader;
pub mod sample;

pub use loader::{load_articles, load_or_sample, ArticleSource, FileSource, GeneratedSource};
pub use sample::SampleGenerator;
