//! Payload module
//!
//! Slack message payload types and the builder that renders them from coin
//! snapshots

mod builder;
mod types;

pub use builder::{
    render_payload, wants_chart, PayloadBuilder, ATH_MARKER, DEFAULT_IMAGE_HOST, EMPTY_VALUE,
    FIELD_ATH, FIELD_CHANGE_24H, FIELD_CHANGE_7D, FIELD_MARKET_CAP, FIELD_PRICE, FIELD_PULLBACK,
    MAX_CHART_RANK,
};
pub use types::{Accessory, Block, Field, MessagePayload, TextKind, TextObject};
