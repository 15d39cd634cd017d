//! Chip-style tag list used by the specs and features editors.
//!
//! The list itself is the state; chips are a projection of it. Each chip has
//! a stable key so removing one duplicate never removes its twin.

#[cfg(test)]
#[path = "tag_list_test.rs"]
mod tag_list_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub key: u64,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<Tag>,
    next_key: u64,
}

impl TagList {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for value in values {
            list.push(value.into());
        }
        list
    }

    fn push(&mut self, text: String) {
        self.next_key += 1;
        self.tags.push(Tag { key: self.next_key, text });
    }

    /// Append the trimmed input. Blank input is ignored and returns `false`.
    pub fn add(&mut self, input: &str) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.push(trimmed.to_owned());
        true
    }

    /// Remove the chip with `key`; returns whether one was removed.
    pub fn remove(&mut self, key: u64) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.key != key);
        self.tags.len() != before
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Authoritative values for submission, in display order.
    pub fn values(&self) -> Vec<String> {
        self.tags
            .iter()
            .map(|tag| tag.text.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
