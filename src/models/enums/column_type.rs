use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ColumnType {
    #[default]
    integer,
    big_integer,
    float,
    boolean,
    string,
    text,
    timestamp,
    uuid,
}
