use crate::{bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, serde::Serde};

/// Unsigned integer written in chunks of `BITS` bits, each chunk preceded by
/// a bit set when another chunk follows
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct UnsignedVariableInteger<const BITS: u8> {
    inner: u64,
}

impl<const BITS: u8> UnsignedVariableInteger<BITS> {
    pub fn get(&self) -> u64 {
        self.inner
    }

    pub fn set<T: Into<u64>>(&mut self, value: T) {
        self.inner = value.into();
    }

    pub fn new<T: Into<u64>>(value: T) -> Self {
        if BITS == 0 {
            panic!("can't create an integer with 0 bits...");
        }
        if BITS > 63 {
            panic!("can't create an integer with more than 63 bits...");
        }

        Self {
            inner: value.into(),
        }
    }

    fn chunk_limit() -> u64 {
        1_u64 << BITS
    }
}

impl<const BITS: u8> Serde for UnsignedVariableInteger<BITS> {
    fn ser(&self, writer: &mut dyn BitWrite) {
        let mut value = self.inner;

        loop {
            let proceed = value >= Self::chunk_limit();
            writer.write_bit(proceed);

            for _ in 0..BITS {
                writer.write_bit(value & 1 != 0);
                value >>= 1;
            }
            if !proceed {
                return;
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        let mut output: u64 = 0;
        let mut total_bits: u32 = 0;

        loop {
            let proceed = reader.read_bit()?;

            for _ in 0..BITS {
                let bit = reader.read_bit()?;
                if bit {
                    // value doesn't fit in 64 bits
                    if total_bits >= 64 {
                        return Err(SerdeErr);
                    }
                    output |= 1 << total_bits;
                }
                total_bits += 1;
            }

            if !proceed {
                break;
            }
            if total_bits >= 64 {
                return Err(SerdeErr);
            }
        }

        Ok(Self { inner: output })
    }

    fn bit_length(&self) -> u32 {
        let mut output: u32 = 0;
        let mut value = self.inner;

        loop {
            let proceed = value >= Self::chunk_limit();
            output += 1 + u32::from(BITS);
            value >>= BITS;
            if !proceed {
                break;
            }
        }

        output
    }
}

// Tests
