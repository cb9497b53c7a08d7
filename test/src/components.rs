use std::any::Any;

use mirage_shared::{BitReader, BitWrite, Replicate, Serde, SerdeErr};

// Health
#[derive(Clone, PartialEq, Debug)]
pub struct Health {
    pub current: u16,
    pub max: u16,
}

impl Health {
    pub fn new(current: u16, max: u16) -> Self {
        Self { current, max }
    }
}

impl Replicate for Health {
    fn write_state(&self, writer: &mut dyn BitWrite) {
        self.current.ser(writer);
        self.max.ser(writer);
    }

    fn read_state(&mut self, reader: &mut BitReader) -> Result<(), SerdeErr> {
        self.current = u16::de(reader)?;
        self.max = u16::de(reader)?;
        Ok(())
    }

    fn copy_to_box(&self) -> Box<dyn Replicate> {
        Box::new(self.clone())
    }

    fn mirror(&mut self, other: &dyn Replicate) {
        if let Some(other) = other.to_any().downcast_ref::<Self>() {
            *self = other.clone();
        }
    }

    fn to_any(&self) -> &dyn Any {
        self
    }

    fn to_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// Label
#[derive(Clone, PartialEq, Debug)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl Replicate for Label {
    fn write_state(&self, writer: &mut dyn BitWrite) {
        self.text.ser(writer);
    }

    fn read_state(&mut self, reader: &mut BitReader) -> Result<(), SerdeErr> {
        self.text = String::de(reader)?;
        Ok(())
    }

    fn copy_to_box(&self) -> Box<dyn Replicate> {
        Box::new(self.clone())
    }

    fn mirror(&mut self, other: &dyn Replicate) {
        if let Some(other) = other.to_any().downcast_ref::<Self>() {
            *self = other.clone();
        }
    }

    fn to_any(&self) -> &dyn Any {
        self
    }

    fn to_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
