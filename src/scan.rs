const MSB_MASK: u64 = 0x8080_8080_8080_8080;
const LSB_MASK: u64 = 0x0101_0101_0101_0101;

pub trait ByteScan {
    fn find_byte(&self, needle: u8) -> Option<usize>;
}

impl ByteScan for [u8] {
    /// Word-at-a-time needle search: a byte equals the needle exactly when
    /// `(x - 0x01..) & !x & 0x80..` is non-zero for `x = word ^ broadcast`.
    #[inline(always)]
    fn find_byte(&self, needle: u8) -> Option<usize> {
        let broadcast = LSB_MASK * needle as u64;

        let mut i = 0;
        while i + 8 <= self.len() {
            let word = u64::from_ne_bytes(self[i..i + 8].try_into().unwrap());
            let diff = word ^ broadcast;
            let hits = diff.wrapping_sub(LSB_MASK) & !diff & MSB_MASK;

            if hits != 0 {
                return Some(i + (hits.trailing_zeros() / 8) as usize);
            }

            i += 8;
        }

        while i < self.len() {
            if self[i] == needle {
                return Some(i);
            }
            i += 1;
        }

        None
    }
}
