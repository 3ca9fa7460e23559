/// The geometry of a simulated cache
///
/// `set_bits` and `block_bits` describe how an address decomposes
/// (`2^set_bits` sets, `2^block_bits` bytes per block); `associativity` is the
/// number of lines each set can hold. All three are required to be positive,
/// and the set and block fields together must leave room for at least one tag
/// bit in a 64-bit address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub set_bits: u32,
    pub associativity: u32,
    pub block_bits: u32,
}

impl CacheConfig {
    /// Builds a geometry, rejecting parameter combinations the decomposition
    /// cannot support
    pub fn new(set_bits: u32, associativity: u32, block_bits: u32) -> Result<Self, String> {
        let config = Self {
            set_bits,
            associativity,
            block_bits,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.set_bits == 0 || self.associativity == 0 || self.block_bits == 0 {
            return Err(format!(
                "Set bits, associativity, and block bits must all be positive (got s={}, E={}, b={})",
                self.set_bits, self.associativity, self.block_bits
            ));
        }
        if self.set_bits.saturating_add(self.block_bits) >= u64::BITS {
            return Err(format!(
                "Set bits plus block bits must leave tag bits in a 64-bit address (got s={} + b={})",
                self.set_bits, self.block_bits
            ));
        }
        Ok(())
    }

    /// The number of sets, `2^set_bits`
    pub fn num_sets(&self) -> u64 {
        1 << self.set_bits
    }
}
