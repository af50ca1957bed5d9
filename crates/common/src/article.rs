/// One headline as returned by the news API, flattened for the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub source_name: String,
    pub image_url: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            source_name: source_name.into(),
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
