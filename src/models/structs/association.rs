use serde::Serialize;
use crate::models::enums::association_kind::AssociationKind;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Association {
    pub kind: AssociationKind,
    pub source: String,
    pub target: String,
    pub target_table: String,
    pub foreign_key: String,
}
