use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Formatting actions offered by the editor toolbar, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum FormatAction {
    #[strum(serialize = "Bold")]
    Bold,
    #[strum(serialize = "Italic")]
    Italic,
    #[strum(serialize = "Link")]
    Link,
    #[strum(serialize = "Bulleted list")]
    BulletedList,
    #[strum(serialize = "Numbered list")]
    NumberedList,
    #[strum(serialize = "Heading")]
    Heading,
    #[strum(serialize = "Quote")]
    Quote,
    #[strum(serialize = "Inline code")]
    InlineCode,
    #[strum(serialize = "Code block")]
    CodeBlock,
    #[strum(serialize = "Embed")]
    Embed,
    #[strum(serialize = "Image")]
    Image,
}

impl FormatAction {
    /// The full toolbar.
    pub fn toolbar() -> Vec<FormatAction> {
        FormatAction::iter().collect()
    }

    /// Tooltip label.
    pub fn label(self) -> String {
        self.to_string()
    }
}
