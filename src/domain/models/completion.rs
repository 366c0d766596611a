use serde::{Deserialize, Serialize};

/// A single candidate returned by a completion service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    content: Option<String>,
}

impl Choice {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// A choice whose message carried no content.
    pub fn empty() -> Self {
        Self { content: None }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

/// Provider-neutral result of one completion round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    choices: Vec<Choice>,
}

impl Completion {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self { choices }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![Choice::new(text)])
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Text of the first choice. Missing or empty content counts as no text.
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(Choice::content)
            .filter(|text| !text.is_empty())
    }

    pub fn into_first_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.content)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_text_takes_only_the_first_choice() {
        let completion = Completion::new(vec![Choice::new("one"), Choice::new("two")]);
        assert_eq!(completion.first_text(), Some("one"));
    }

    #[test]
    fn first_text_is_none_without_usable_content() {
        assert_eq!(Completion::default().first_text(), None);
        assert_eq!(Completion::new(vec![Choice::empty()]).first_text(), None);
        assert_eq!(Completion::from_text("").first_text(), None);
    }

    #[test]
    fn first_text_does_not_skip_to_later_choices() {
        let completion = Completion::new(vec![Choice::empty(), Choice::new("later")]);
        assert_eq!(completion.into_first_text(), None);
    }
}
