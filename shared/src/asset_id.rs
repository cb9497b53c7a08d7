use std::fmt;

use uuid::Uuid;

use mirage_serde::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

/// Opaque identifier of a spawnable asset, shared by client & server.
/// The nil uuid is the empty asset id.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct AssetId(Uuid);

impl AssetId {
    pub const EMPTY: AssetId = AssetId(Uuid::nil());

    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    pub fn parse_str(input: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(input).map(Self)
    }

    pub fn uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for AssetId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serde for AssetId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.0.as_u128().ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self::from_u128(u128::de(reader)?))
    }

    fn bit_length(&self) -> u32 {
        <Self as ConstBitLength>::const_bit_length()
    }
}

impl ConstBitLength for AssetId {
    fn const_bit_length() -> u32 {
        <u128 as ConstBitLength>::const_bit_length()
    }
}
