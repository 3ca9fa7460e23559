use std::fmt;
use crate::cache::AccessOutcome;

/// The kind of memory access a trace line describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Load,
    Store,
    /// A load followed immediately by a store to the same address
    Modify,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::Load => write!(f, "L"),
            AccessKind::Store => write!(f, "S"),
            AccessKind::Modify => write!(f, "M"),
        }
    }
}

/// A single data access parsed from a trace line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRecord {
    pub kind: AccessKind,
    pub address: u64,
    /// The size of the access in bytes. Carried through for the verbose
    /// echo, but the simulation tracks whole blocks and never inspects it
    pub size: u64,
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:x},{}", self.kind, self.address, self.size)
    }
}

/// One trace record together with the outcome of each access it caused.
/// `second` is only present for modifies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatedRecord {
    pub record: AccessRecord,
    pub first: AccessOutcome,
    pub second: Option<AccessOutcome>,
}

impl fmt::Display for AnnotatedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.record, self.first)?;
        if let Some(second) = self.second {
            write!(f, " {second}")?;
        }
        Ok(())
    }
}

/// Maps an ASCII byte to its hex digit value, with 0xFF marking bytes which
/// are not hex digits
const HEX_LOOKUP: [u8; 256] = build_hex_lookup();

const fn build_hex_lookup() -> [u8; 256] {
    let mut table = [0xFFu8; 256];
    let mut i = 0u8;
    while i < 10 {
        table[(b'0' + i) as usize] = i;
        i += 1;
    }
    let mut i = 0u8;
    while i < 6 {
        table[(b'a' + i) as usize] = 10 + i;
        table[(b'A' + i) as usize] = 10 + i;
        i += 1;
    }
    table
}

/// Parses an unprefixed hexadecimal address
///
/// Re-implemented with a lookup table as parse and from_str_radix end up
/// being the bottleneck for smaller caches. The table rejects non-digits, so
/// unlike the standard library this returns `None` instead of an error for
/// malformed input, which is what trace skipping wants anyway
///
/// # Examples
///
/// ```
/// use csimlib::trace::parse_hex;
/// assert_eq!(parse_hex("7ff000998"), Some(0x7ff000998));
/// assert_eq!(parse_hex("00000000000000FF"), Some(255));
/// assert_eq!(parse_hex("pancake"), None);
/// ```
pub fn parse_hex(digits: &str) -> Option<u64> {
    let bytes = digits.as_bytes();
    // More than 16 digits can't fit a 64-bit address
    if bytes.is_empty() || bytes.len() > 16 {
        return None;
    }
    let mut res: u64 = 0;
    for &byte in bytes {
        let value = HEX_LOOKUP[byte as usize];
        if value == 0xFF {
            return None;
        }
        res = (res << 4) | value as u64;
    }
    debug_assert_eq!(u64::from_str_radix(digits, 16).ok(), Some(res));
    Some(res)
}

/// Parses one trace line into an access record
///
/// A record line holds an operation character (`L` for a load, `S` for a
/// store, `M` for a load followed by a store), at least one whitespace
/// character, a hexadecimal address, and a decimal size, with optional
/// whitespace before the operation. Anything else (instruction fetches,
/// blank lines, glued operations like `L0,1`, noise) yields `None` and is
/// expected to be skipped by the caller
///
/// # Examples
///
/// ```
/// use csimlib::trace::{parse_record, AccessKind};
/// let record = parse_record(" L 7ff000998,8\n").unwrap();
/// assert_eq!(record.kind, AccessKind::Load);
/// assert_eq!(record.address, 0x7ff000998);
/// assert_eq!(record.size, 8);
/// assert!(parse_record("I 4000,4").is_none());
/// assert!(parse_record("L0,1").is_none());
/// ```
pub fn parse_record(line: &str) -> Option<AccessRecord> {
    let line = line.trim_start();
    let kind = match line.as_bytes().first()? {
        b'L' => AccessKind::Load,
        b'S' => AccessKind::Store,
        b'M' => AccessKind::Modify,
        _ => return None,
    };
    // The operation character is ASCII, so slicing past it is safe. At least
    // one whitespace character must follow it; a glued "L0,1" is noise
    if !line[1..].starts_with(char::is_whitespace) {
        return None;
    }
    let (address, size) = line[1..].trim_start().split_once(',')?;
    let address = parse_hex(address)?;
    let size = size.trim().parse::<u64>().ok()?;
    Some(AccessRecord {
        kind,
        address,
        size,
    })
}
