use mirage_shared::{
    serde::UnsignedVariableInteger, BitReader, Replicate, Serde, SerdeErr, SpatialHint,
    SpawnDirective, WorldMutType,
};

use crate::error::SpawnError;

/// Writes the initial replicated state carried by a spawn directive onto a
/// resolved object. Fresh and already-existing objects go through exactly
/// the same procedure.
#[derive(Copy, Clone, Debug, Default)]
pub struct PayloadApplier;

impl PayloadApplier {
    /// Applies the directive's payload, then its spatial hint. A corrupt
    /// payload leaves the entity untouched.
    pub fn apply<E, W: WorldMutType<E>>(
        world: &mut W,
        entity: &E,
        directive: &SpawnDirective,
    ) -> Result<(), SpawnError> {
        Self::read_payload(world, entity, &directive.payload)
            .map_err(|_| SpawnError::PayloadCorrupt(directive.network_id))?;
        Self::apply_spatial(world, entity, &directive.spatial);
        Ok(())
    }

    pub fn apply_spatial<E, W: WorldMutType<E>>(world: &mut W, entity: &E, spatial: &SpatialHint) {
        if !spatial.is_empty() {
            world.apply_spatial(entity, spatial);
        }
    }

    /// Reads a payload produced by `mirage_shared::write_payload` into the
    /// entity's replicated components. An empty payload carries no state.
    ///
    /// The whole payload is decoded into copies of the components first,
    /// which are only mirrored onto the entity once every check has passed.
    pub fn read_payload<E, W: WorldMutType<E>>(
        world: &mut W,
        entity: &E,
        payload: &[u8],
    ) -> Result<(), SerdeErr> {
        if payload.is_empty() {
            return Ok(());
        }

        let staged = Self::decode(world, entity, payload)?;

        for (index, copy) in staged.iter().enumerate() {
            let Some(replica) = world.replica_mut(entity, index) else {
                return Err(SerdeErr);
            };
            replica.mirror(copy.as_ref());
        }

        Ok(())
    }

    fn decode<E, W: WorldMutType<E>>(
        world: &mut W,
        entity: &E,
        payload: &[u8],
    ) -> Result<Vec<Box<dyn Replicate>>, SerdeErr> {
        let mut reader = BitReader::new(payload);

        let replica_count = world.replica_count(entity);
        let sent_count = UnsignedVariableInteger::<3>::de(&mut reader)?.get();
        if sent_count != replica_count as u64 {
            return Err(SerdeErr);
        }

        let mut staged = Vec::with_capacity(replica_count);
        for index in 0..replica_count {
            let sent_bits = UnsignedVariableInteger::<7>::de(&mut reader)?.get();
            let Some(replica) = world.replica_mut(entity, index) else {
                return Err(SerdeErr);
            };
            let mut copy = replica.copy_to_box();

            let start = reader.bits_read();
            copy.read_state(&mut reader)?;
            let read_bits = reader.bits_read() - start;

            if u64::from(read_bits) != sent_bits {
                return Err(SerdeErr);
            }
            staged.push(copy);
        }

        // only the final byte's padding may be left over
        if reader.bits_remaining() >= 8 {
            return Err(SerdeErr);
        }

        Ok(staged)
    }
}
