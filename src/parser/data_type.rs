//! Closed lookup from data-type tokens to element sizes.
//!
//! The benchmark encodes the element type of each container as a token
//! inside the template-like label (`int`, `size_16`, `size_64`). The set
//! of tokens is closed: anything else means the input file came from an
//! incompatible benchmark build, and graphing it would silently corrupt
//! the data-size axis. Unknown tokens are therefore a hard error.

use crate::utils::error::ParseError;
use std::str::FromStr;

/// Element data type stored in the benchmarked containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Plain `int`, 4 bytes
    Int,
    /// 16-byte struct
    Size16,
    /// 64-byte struct
    Size64,
}

impl DataType {
    /// Size of one element of this type, in bytes
    pub fn size_bytes(&self) -> u32 {
        match self {
            DataType::Int => 4,
            DataType::Size16 => 16,
            DataType::Size64 => 64,
        }
    }
}

impl FromStr for DataType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "int" => Ok(DataType::Int),
            "size_16" => Ok(DataType::Size16),
            "size_64" => Ok(DataType::Size64),
            other => Err(ParseError::UnknownDataType(other.to_string())),
        }
    }
}
