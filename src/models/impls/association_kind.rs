use std::fmt;
use crate::models::enums::association_kind::AssociationKind;

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationKind::belongs_to => write!(f, "belongs_to"),
            AssociationKind::has_one => write!(f, "has_one"),
            AssociationKind::has_many => write!(f, "has_many"),
        }
    }
}

impl AssociationKind {
    /// Foreign key column used when the association does not name one.
    ///
    /// `belongs_to` keeps the key on the source (`<target>_id`), `has_one` and
    /// `has_many` keep it on the target (`<source>_id`).
    pub fn default_foreign_key(&self, source: &str, target: &str) -> String {
        match self {
            AssociationKind::belongs_to => format!("{}_id", target),
            AssociationKind::has_one | AssociationKind::has_many => format!("{}_id", source),
        }
    }

    pub fn foreign_key_on_source(&self) -> bool {
        matches!(self, AssociationKind::belongs_to)
    }
}
