use std::fmt;

/// Identifier of a localized string, resolved to text only when the snackbar
/// is about to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(&'static str);

impl ResourceId {
    /// Creates a resource identifier from its key in the string table.
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// The raw key of this resource.
    pub const fn key(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

/// Text displayed by a snackbar, either as-is or looked up at delivery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationText {
    /// Text that is shown exactly as given.
    Literal(String),
    /// Localized text resolved by a [`crate::surface::ResourceResolver`].
    Resource(ResourceId),
}

impl NotificationText {
    /// Returns the literal value, if this is not a resource reference.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            NotificationText::Literal(value) => Some(value),
            NotificationText::Resource(_) => None,
        }
    }
}

impl From<&str> for NotificationText {
    fn from(value: &str) -> Self {
        NotificationText::Literal(value.to_string())
    }
}

impl From<String> for NotificationText {
    fn from(value: String) -> Self {
        NotificationText::Literal(value)
    }
}

impl From<ResourceId> for NotificationText {
    fn from(value: ResourceId) -> Self {
        NotificationText::Resource(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OK: ResourceId = ResourceId::new("ok");

    #[test]
    fn strings_become_literals() {
        assert_eq!(
            NotificationText::from("hey"),
            NotificationText::Literal("hey".to_string())
        );
        assert_eq!(NotificationText::from(String::from("hey")).as_literal(), Some("hey"));
    }

    #[test]
    fn resource_ids_stay_unresolved() {
        let text = NotificationText::from(OK);
        assert_eq!(text, NotificationText::Resource(OK));
        assert_eq!(text.as_literal(), None);
        assert_eq!(OK.to_string(), "ok");
    }
}
