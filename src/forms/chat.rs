use serde::Deserialize;

/// Question submitted from the chat entry page.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub q: Option<String>,
}

impl QuestionForm {
    pub fn question(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}
