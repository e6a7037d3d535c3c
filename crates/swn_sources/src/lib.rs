pub mod newsapi;

pub use newsapi::NewsApiSource;

pub mod prelude {
    pub use super::newsapi::NewsApiSource;
    pub use swn_core::{HeadlineSource, RawArticle, Result, Error};
}
