use crate::SerdeErr;

// BitReader

pub struct BitReader<'b> {
    state: BitReaderState,
    buffer: &'b [u8],
}

impl<'b> BitReader<'b> {
    pub fn new(buffer: &'b [u8]) -> Self {
        Self {
            state: BitReaderState {
                scratch: 0,
                scratch_index: 0,
                buffer_index: 0,
                bits_read: 0,
            },
            buffer,
        }
    }

    /// Number of bits consumed so far
    pub fn bits_read(&self) -> u32 {
        self.state.bits_read
    }

    /// Number of bits left before the end of the buffer
    pub fn bits_remaining(&self) -> u32 {
        let unread_bytes = (self.buffer.len() - self.state.buffer_index) as u32;
        (unread_bytes * 8) + u32::from(self.state.scratch_index)
    }

    pub fn read_bit(&mut self) -> Result<bool, SerdeErr> {
        if self.state.scratch_index == 0 {
            if self.state.buffer_index == self.buffer.len() {
                return Err(SerdeErr);
            }

            self.state.scratch = self.buffer[self.state.buffer_index];

            self.state.buffer_index += 1;
            self.state.scratch_index += 8;
        }

        let value = self.state.scratch & 1;

        self.state.scratch >>= 1;

        self.state.scratch_index -= 1;
        self.state.bits_read += 1;

        Ok(value != 0)
    }

    pub fn read_byte(&mut self) -> Result<u8, SerdeErr> {
        let mut output = 0;
        for _ in 0..7 {
            if self.read_bit()? {
                output |= 128;
            }
            output >>= 1;
        }
        if self.read_bit()? {
            output |= 128;
        }
        Ok(output)
    }
}

// BitReaderState
#[derive(Copy, Clone)]
struct BitReaderState {
    scratch: u8,
    scratch_index: u8,
    buffer_index: usize,
    bits_read: u32,
}
