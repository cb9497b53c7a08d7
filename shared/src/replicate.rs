use std::any::Any;

use mirage_serde::{BitReader, BitWrite, SerdeErr};

/// A container of replicated fields attached to a networked object, whose
/// full state can be written to, and read from, a spawn payload
pub trait Replicate: Any {
    /// Writes the complete state of the fields into an outgoing stream
    fn write_state(&self, writer: &mut dyn BitWrite);
    /// Overwrites the fields with state read from an incoming stream
    fn read_state(&mut self, reader: &mut BitReader) -> Result<(), SerdeErr>;
    /// Deep-copies the component, used when instantiating from a template
    fn copy_to_box(&self) -> Box<dyn Replicate>;
    /// Sets the fields to those of `other`, which is of the same type
    fn mirror(&mut self, other: &dyn Replicate);
    fn to_any(&self) -> &dyn Any;
    fn to_any_mut(&mut self) -> &mut dyn Any;
}
