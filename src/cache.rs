use std::fmt;
use crate::config::CacheConfig;
use crate::stats::Summary;

/// What servicing a single access did to the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The block was already resident
    Hit,
    /// The block was brought into a set that still had room
    Miss,
    /// The block displaced the least recently used line of a full set
    MissEviction,
}

impl fmt::Display for AccessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessOutcome::Hit => write!(f, "hit"),
            AccessOutcome::Miss => write!(f, "miss"),
            AccessOutcome::MissEviction => write!(f, "miss eviction"),
        }
    }
}

/// A single cache line. Only resident lines are stored, so a line is always
/// valid and the tag is the only state it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheLine {
    tag: u64,
}

/// One set, holding its resident lines in recency order with the most
/// recently used line first
#[derive(Debug)]
struct CacheSet {
    lines: Vec<CacheLine>,
}

impl CacheSet {
    // `capacity` is the associativity of the owning cache
    fn access(&mut self, tag: u64, capacity: usize) -> AccessOutcome {
        if let Some(position) = self.lines.iter().position(|line| line.tag == tag) {
            // Rotating the prefix moves the hit line to the front without
            // disturbing the relative order of the lines in front of it
            self.lines[..=position].rotate_right(1);
            return AccessOutcome::Hit;
        }
        let outcome = if self.lines.len() == capacity {
            // The back of the vector is always the least recently used line
            self.lines.pop();
            AccessOutcome::MissEviction
        } else {
            AccessOutcome::Miss
        };
        self.lines.insert(0, CacheLine { tag });
        outcome
    }

    fn contains(&self, tag: u64) -> bool {
        self.lines.iter().any(|line| line.tag == tag)
    }
}

/// A set-associative cache with least recently used replacement
///
/// The cache models residency only. No data is stored and no backing memory
/// exists; an access reports whether the block was present and whether a
/// resident line had to be displaced to admit it
///
/// The address decomposition masks are computed once at construction, so the
/// per-access work is two shifts, a mask, and a search of a single set
pub struct Cache {
    sets: Vec<CacheSet>,
    associativity: usize,
    set_selection_bit_mask: u64,
    block_offset_bits: u32,
    tag_offset_bits: u32,
    summary: Summary,
}

impl Cache {
    /// Creates an empty cache with the given geometry
    pub fn new(config: &CacheConfig) -> Self {
        debug_assert!(config.validate().is_ok());
        let associativity = config.associativity as usize;
        let sets = (0..config.num_sets())
            .map(|_| CacheSet {
                lines: Vec::with_capacity(associativity),
            })
            .collect();
        Self {
            sets,
            associativity,
            set_selection_bit_mask: config.num_sets() - 1,
            block_offset_bits: config.block_bits,
            tag_offset_bits: config.set_bits + config.block_bits,
            summary: Summary::default(),
        }
    }

    /// Converts an address into a set index and a tag
    ///
    /// The block offset is discarded. Residency is tracked per block, so two
    /// addresses within the same block are indistinguishable to the cache
    pub fn address_to_set_and_tag(&self, address: u64) -> (usize, u64) {
        let set = (address >> self.block_offset_bits) & self.set_selection_bit_mask;
        let tag = address >> self.tag_offset_bits;
        (set as usize, tag)
    }

    /// Services a single access, updating recency order and the running
    /// summary
    ///
    /// # Arguments
    ///
    /// * `address`: The address of the access. Its size is irrelevant here;
    ///   accesses are assumed not to straddle a block boundary
    ///
    /// returns: AccessOutcome
    pub fn access(&mut self, address: u64) -> AccessOutcome {
        let (set, tag) = self.address_to_set_and_tag(address);
        let outcome = self.sets[set].access(tag, self.associativity);
        self.summary.record(outcome);
        outcome
    }

    /// Reports whether the block containing `address` is resident, without
    /// touching recency order or the counters
    pub fn contains(&self, address: u64) -> bool {
        let (set, tag) = self.address_to_set_and_tag(address);
        self.sets[set].contains(tag)
    }

    /// Gets the totals accumulated across all accesses so far
    pub fn get_summary(&self) -> &Summary {
        &self.summary
    }
}
