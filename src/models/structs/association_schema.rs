use serde::{Deserialize, Serialize};
use crate::models::enums::association_kind::AssociationKind;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssociationSchema {
    pub kind: AssociationKind,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<String>,
}
