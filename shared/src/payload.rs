use mirage_serde::{BitCounter, BitWrite, BitWriter, Serde, UnsignedVariableInteger};

use crate::Replicate;

/// Writes the initial state of an object's replicated components, in the
/// order the receiving world reports them.
///
/// Layout: component count, then for each component its state length in
/// bits followed by the state itself. The per-component length lets the
/// reader detect a component that consumed more or less than was written.
pub fn write_payload(components: &[&dyn Replicate]) -> Box<[u8]> {
    let mut writer = BitWriter::new();

    UnsignedVariableInteger::<3>::new(components.len() as u64).ser(&mut writer);

    for component in components {
        let mut counter = BitCounter::new();
        component.write_state(&mut counter);

        UnsignedVariableInteger::<7>::new(counter.bits_needed()).ser(&mut writer);
        component.write_state(&mut writer);
    }

    writer.to_bytes()
}
