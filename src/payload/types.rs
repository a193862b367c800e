//! Slack Block Kit payload types

use serde::Serialize;

/// Text object formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    Mrkdwn,
    PlainText,
}

/// Block Kit text object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub kind: TextKind,
    pub text: String,
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Mrkdwn,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::PlainText,
            text: text.into(),
        }
    }
}

/// Labelled value in a section block, sent as `*Label*\nvalue`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "TextObject")]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl From<Field> for TextObject {
    fn from(field: Field) -> Self {
        TextObject::mrkdwn(format!("*{}*\n{}", field.label, field.value))
    }
}

/// Image element shown beside a section's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Accessory {
    Image { image_url: String, alt_text: String },
}

/// Renderable payload section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Title, summary and field grid
    Section {
        text: TextObject,
        fields: Vec<Field>,
        #[serde(skip_serializing_if = "Option::is_none")]
        accessory: Option<Accessory>,
    },
    /// Full-width image
    Image {
        title: TextObject,
        image_url: String,
        alt_text: String,
    },
}

impl Block {
    pub fn is_section(&self) -> bool {
        matches!(self, Block::Section { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image { .. })
    }
}

/// Complete chat message, ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagePayload {
    /// Plain summary, used for notifications and fallbacks
    pub text: String,
    pub blocks: Vec<Block>,
    pub unfurl_links: bool,
}

impl MessagePayload {
    /// Fields of the info section
    pub fn fields(&self) -> &[Field] {
        self.blocks
            .iter()
            .find_map(|block| match block {
                Block::Section { fields, .. } => Some(fields.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Value of the info-section field with the given label
    pub fn field(&self, label: &str) -> Option<&str> {
        self.fields()
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.value.as_str())
    }

    /// Hosted chart URL, when a chart block was attached
    pub fn chart_url(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Image { image_url, .. } => Some(image_url.as_str()),
            _ => None,
        })
    }
}
