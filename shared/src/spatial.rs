use mirage_serde::{BitReader, BitWrite, ConstBitLength, Serde, SerdeErr};

#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const ONE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Serde for Vec3 {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.x.ser(writer);
        self.y.ser(writer);
        self.z.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            x: f32::de(reader)?,
            y: f32::de(reader)?,
            z: f32::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        <Self as ConstBitLength>::const_bit_length()
    }
}

impl ConstBitLength for Vec3 {
    fn const_bit_length() -> u32 {
        <f32 as ConstBitLength>::const_bit_length() * 3
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Quat = Quat::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Serde for Quat {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.x.ser(writer);
        self.y.ser(writer);
        self.z.ser(writer);
        self.w.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            x: f32::de(reader)?,
            y: f32::de(reader)?,
            z: f32::de(reader)?,
            w: f32::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        <Self as ConstBitLength>::const_bit_length()
    }
}

impl ConstBitLength for Quat {
    fn const_bit_length() -> u32 {
        <f32 as ConstBitLength>::const_bit_length() * 4
    }
}

/// Optional placement sent alongside a spawn. Absent fields leave the
/// instance's current value untouched.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct SpatialHint {
    pub position: Option<Vec3>,
    pub rotation: Option<Quat>,
    pub scale: Option<Vec3>,
}

impl SpatialHint {
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }
}

impl Serde for SpatialHint {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.position.ser(writer);
        self.rotation.ser(writer);
        self.scale.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            position: Serde::de(reader)?,
            rotation: Serde::de(reader)?,
            scale: Serde::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.position.bit_length() + self.rotation.bit_length() + self.scale.bit_length()
    }
}
