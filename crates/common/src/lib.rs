pub mod article;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod secrets;

pub use article::Article;
pub use config::Config;
pub use error::{NewsError, NewsResult};
pub use pipeline::{HeadlineClassifier, HeadlineSource};
pub use secrets::Secrets;
