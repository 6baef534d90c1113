//! Model enumeration types.

/// Kind of relation between two models (belongs_to, has_one, has_many).
pub mod association_kind;

/// Column types understood by the bundled ORM.
pub mod column_type;

/// How a connection spec refers to one of its models.
pub mod model_reference;
