use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Campsite {
    pub id          : u64,
    pub name        : String,
    pub image       : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation   : Option<u32>,
    #[serde(default)]
    pub featured    : bool,
    pub description : String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id          : u64,
    pub campsite_id : u64,
    pub rating      : u8,
    pub text        : String,
    pub author      : String,
    pub date        : String,
}
