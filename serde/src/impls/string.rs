use crate::{
    bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, serde::Serde,
    UnsignedVariableInteger,
};

impl Serde for String {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let length = UnsignedVariableInteger::<9>::new(self.len() as u64);
        length.ser(writer);
        for byte in self.as_bytes() {
            writer.write_byte(*byte);
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let length_int = UnsignedVariableInteger::<9>::de(reader)?;
        let length_usize = usize::try_from(length_int.get()).map_err(|_| SerdeErr)?;
        if length_usize > (reader.bits_remaining() / 8) as usize {
            return Err(SerdeErr);
        }
        let mut bytes: Vec<u8> = Vec::with_capacity(length_usize);
        for _ in 0..length_usize {
            bytes.push(reader.read_byte()?);
        }

        String::from_utf8(bytes).map_err(|_| SerdeErr)
    }

    fn bit_length(&self) -> u32 {
        let length = UnsignedVariableInteger::<9>::new(self.len() as u64);
        length.bit_length() + (self.len() as u32) * 8
    }
}

// Tests
