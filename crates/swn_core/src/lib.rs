pub mod error;
pub mod models;
pub mod source;
pub mod storage;
pub mod types;

pub use error::{Error, Result};
pub use models::{InferenceModel, Prompt};
pub use source::HeadlineSource;
pub use storage::ArticleCache;
pub use types::{CuratedArticle, RawArticle, RawSource};
