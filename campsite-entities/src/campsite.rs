use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campsite {
    pub id          : Id,
    pub name        : String,
    pub image       : String,
    pub description : String,
}
