use mirage_serde::{BitReader, BitWrite, Serde, SerdeErr, UnsignedVariableInteger};

use crate::{AssetId, NetworkId, Quat, SceneId, SpatialHint, Vec3};

/// Server instruction to materialize a networked object on the client.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SpawnDirective {
    pub network_id: NetworkId,
    /// Whether the receiving client has authority over the object
    pub is_owner: bool,
    /// Key into the template / handler registry, may be empty
    pub asset_id: AssetId,
    /// Key into the scene object registry, `SceneId::NONE` if not a scene object
    pub scene_id: SceneId,
    pub spatial: SpatialHint,
    /// Serialized initial replicated state, may be empty
    pub payload: Box<[u8]>,
}

impl SpawnDirective {
    pub fn new(network_id: NetworkId) -> Self {
        Self {
            network_id,
            ..Default::default()
        }
    }

    pub fn with_asset_id(mut self, asset_id: AssetId) -> Self {
        self.asset_id = asset_id;
        self
    }

    pub fn with_scene_id(mut self, scene_id: SceneId) -> Self {
        self.scene_id = scene_id;
        self
    }

    pub fn with_owner(mut self, is_owner: bool) -> Self {
        self.is_owner = is_owner;
        self
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.spatial.position = Some(position);
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.spatial.rotation = Some(rotation);
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.spatial.scale = Some(scale);
        self
    }

    pub fn with_payload(mut self, payload: Box<[u8]>) -> Self {
        self.payload = payload;
        self
    }

    /// True if neither an asset id nor a scene id was sent
    pub fn is_unidentified(&self) -> bool {
        self.asset_id.is_empty() && !self.scene_id.is_scene()
    }
}

impl Serde for SpawnDirective {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.network_id.ser(writer);
        self.is_owner.ser(writer);
        self.asset_id.ser(writer);
        self.scene_id.ser(writer);
        self.spatial.ser(writer);

        UnsignedVariableInteger::<9>::new(self.payload.len() as u64).ser(writer);
        for byte in self.payload.iter() {
            writer.write_byte(*byte);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let network_id = NetworkId::de(reader)?;
        let is_owner = bool::de(reader)?;
        let asset_id = AssetId::de(reader)?;
        let scene_id = SceneId::de(reader)?;
        let spatial = SpatialHint::de(reader)?;

        let payload_length = UnsignedVariableInteger::<9>::de(reader)?.get();
        let payload_length = usize::try_from(payload_length).map_err(|_| SerdeErr)?;
        if payload_length > (reader.bits_remaining() / 8) as usize {
            return Err(SerdeErr);
        }
        let mut payload = Vec::with_capacity(payload_length);
        for _ in 0..payload_length {
            payload.push(reader.read_byte()?);
        }

        Ok(Self {
            network_id,
            is_owner,
            asset_id,
            scene_id,
            spatial,
            payload: payload.into_boxed_slice(),
        })
    }

    fn bit_length(&self) -> u32 {
        let payload_length = UnsignedVariableInteger::<9>::new(self.payload.len() as u64);
        self.network_id.bit_length()
            + self.is_owner.bit_length()
            + self.asset_id.bit_length()
            + self.scene_id.bit_length()
            + self.spatial.bit_length()
            + payload_length.bit_length()
            + (self.payload.len() as u32) * 8
    }
}

/// Server instruction to remove a networked object from the client.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct UnspawnDirective {
    pub network_id: NetworkId,
}

impl UnspawnDirective {
    pub fn new(network_id: NetworkId) -> Self {
        Self { network_id }
    }
}

impl Serde for UnspawnDirective {
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.network_id.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            network_id: NetworkId::de(reader)?,
        })
    }

    fn bit_length(&self) -> u32 {
        self.network_id.bit_length()
    }
}
