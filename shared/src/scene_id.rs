use std::fmt;

use mirage_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

/// Identifier of an object placed in a scene before the network session
/// started. Zero means the object is not a scene object.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct SceneId(u64);

impl SceneId {
    pub const NONE: SceneId = SceneId(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn to_u64(&self) -> u64 {
        self.0
    }

    pub fn is_scene(&self) -> bool {
        self.0 != 0
    }
}

impl From<u64> for SceneId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

impl Serde for SceneId {
    fn ser(&self, writer: &mut dyn BitWrite) {
        UnsignedVariableInteger::<7>::new(self.0).ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let value = UnsignedVariableInteger::<7>::de(reader)?.get();
        Ok(Self(value))
    }

    fn bit_length(&self) -> u32 {
        UnsignedVariableInteger::<7>::new(self.0).bit_length()
    }
}
