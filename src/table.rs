use crate::error::{Error, Result};

// FNV-1a 64-bit offset basis and prime
pub const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

// Power of two with 10k distinct stations staying under 0.61 load, so probe
// chains stay short without a rehash path.
pub const DEFAULT_CAPACITY: usize = 1 << 14;

#[inline(always)]
pub fn hash_name(seed: u64, name: &[u8]) -> u64 {
    let mut hash = seed;
    for &byte in name {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Station<'a> {
    pub name: &'a [u8],
    pub hash: u64,
    pub min: i16,
    pub max: i16,
    pub total: i64,
    pub count: u64,
}

impl<'a> Station<'a> {
    fn first(name: &'a [u8], hash: u64, temp: i16) -> Self {
        Self {
            name,
            hash,
            min: temp,
            max: temp,
            total: temp as i64,
            count: 1,
        }
    }

    /// Mean in decidegrees: truncated toward zero, then moved one decidegree
    /// away from zero once the discarded remainder reaches a tenth of the
    /// count.
    pub fn mean(&self) -> i64 {
        let count = self.count as i64;
        let quot = self.total / count;
        let rem = (self.total % count).abs();

        if 10 * rem >= count {
            quot + if self.total < 0 { -1 } else { 1 }
        } else {
            quot
        }
    }
}

#[derive(Debug)]
pub struct Table<'a> {
    slots: Vec<Option<Station<'a>>>,
    mask: usize,
    len: usize,
}

impl<'a> Table<'a> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(
            capacity.is_power_of_two(),
            "table capacity must be a power of two"
        );

        Self {
            slots: vec![None; capacity],
            mask: capacity - 1,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Linear probe from `hash & mask`. Returns the slot holding this exact
    /// name, or the first vacant slot, or `None` once every slot has been
    /// probed. Distinct names that collide on the full 64-bit hash keep
    /// distinct slots because the name bytes are compared too.
    #[inline(always)]
    pub fn find_slot(&self, hash: u64, name: &[u8]) -> Option<usize> {
        let mut slot = hash as usize & self.mask;

        for _ in 0..self.slots.len() {
            match &self.slots[slot] {
                None => return Some(slot),
                Some(station) if station.hash == hash && station.name == name => {
                    return Some(slot)
                }
                _ => slot = (slot + 1) & self.mask,
            }
        }

        None
    }

    #[inline(always)]
    pub fn insert_or_update(&mut self, hash: u64, name: &'a [u8], temp: i16) -> Result<()> {
        let slot = self
            .find_slot(hash, name)
            .ok_or(Error::Invariant("station table is full"))?;

        match &mut self.slots[slot] {
            Some(station) => {
                station.min = station.min.min(temp);
                station.max = station.max.max(temp);
                station.total += temp as i64;
                station.count += 1;
            }
            vacant => {
                *vacant = Some(Station::first(name, hash, temp));
                self.len += 1;
            }
        }

        Ok(())
    }

    /// Folds a record from another table into this one: moved verbatim on a
    /// miss, min/max/total/count combined on a hit.
    pub fn absorb(&mut self, other: Station<'a>) -> Result<()> {
        let slot = self
            .find_slot(other.hash, other.name)
            .ok_or(Error::Invariant("station table overflowed during merge"))?;

        match &mut self.slots[slot] {
            Some(station) => {
                station.min = station.min.min(other.min);
                station.max = station.max.max(other.max);
                station.total += other.total;
                station.count += other.count;
            }
            vacant => {
                *vacant = Some(other);
                self.len += 1;
            }
        }

        Ok(())
    }

    pub fn get(&self, hash: u64, name: &[u8]) -> Option<&Station<'a>> {
        let slot = self.find_slot(hash, name)?;
        self.slots[slot].as_ref()
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station<'a>> {
        self.slots.iter().flatten()
    }

    pub fn into_stations(self) -> impl Iterator<Item = Station<'a>> {
        self.slots.into_iter().flatten()
    }
}

impl<'a> Default for Table<'a> {
    fn default() -> Self {
        Self::new()
    }
}
