use serde::Deserialize;

/// Landing page submission.
#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct NameForm {
    #[serde(default)]
    pub name: Option<String>,
}

impl NameForm {
    /// Submitted name; an absent field reads as empty.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
