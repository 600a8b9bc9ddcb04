//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for common OIDs.

use crate::error::{Error, OidErrorKind, Result};
use smallvec::SmallVec;
use std::fmt;
use std::num::IntErrorKind;

/// Maximum number of arcs (subidentifiers) allowed in an OID by default.
///
/// Per RFC 2578 Section 3.5: "there are at most 128 sub-identifiers in a value".
/// The request builder enforces this through
/// [`EncoderConfig::max_oid_len`](crate::EncoderConfig).
pub const MAX_OID_LEN: usize = 128;

/// Object Identifier.
///
/// Stored as a sequence of arc values (u32). Uses SmallVec to avoid
/// heap allocation for OIDs with 16 or fewer arcs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

/// Parse a dotted-decimal OID, silently skipping components that are not
/// numbers.
///
/// `"1.a.3"` yields `1.3`, and `""` yields the empty OID. A component that
/// is a number but not a valid arc (negative, or above `u32::MAX`) is an
/// error, since dropping it would name a different variable. This is the
/// parser used for variable names; use [`Oid::parse()`] to reject all
/// malformed input.
///
/// # Examples
///
/// ```
/// use snmp_packet::oid::parse_oid;
///
/// assert_eq!(parse_oid("1.3.6.1.2.1").unwrap().arcs(), &[1, 3, 6, 1, 2, 1]);
/// assert_eq!(parse_oid("1.a.3").unwrap().arcs(), &[1, 3]);
/// assert!(parse_oid("").unwrap().is_empty());
/// assert!(parse_oid("1.3.4294967296").is_err());
/// ```
pub fn parse_oid(s: &str) -> Result<Oid> {
    let mut arcs = SmallVec::new();

    for part in s.split('.') {
        match part.parse::<u32>() {
            Ok(arc) => arcs.push(arc),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                return Err(Error::invalid_oid_with_input(
                    OidErrorKind::SubidentifierOverflow,
                    s,
                ));
            }
            Err(_) if is_negative_number(part) => {
                return Err(Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s));
            }
            // FIXME: skipping non-numeric arcs can still address a different
            // variable; callers rely on it, so it stays until they validate names.
            Err(_) => {}
        }
    }

    Ok(Oid { arcs })
}

fn is_negative_number(part: &str) -> bool {
    part.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

impl Oid {
    /// Create an empty OID.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from arc values.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_packet::oid::Oid;
    ///
    /// let oid = Oid::new(vec![1, 3, 6, 1, 2, 1]);
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1]);
    ///
    /// let oid = Oid::new(0..5);
    /// assert_eq!(oid.arcs(), &[0, 1, 2, 3, 4]);
    /// ```
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted string notation (e.g., "1.3.6.1.2.1.1.1.0").
    ///
    /// A leading dot and empty components are ignored. Any other
    /// non-numeric component is an error. Arc constraints are not checked;
    /// call [`validate()`](Self::validate) for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_packet::oid::Oid;
    ///
    /// let oid = Oid::parse(".1.3.6.1.4.1").unwrap();
    /// assert_eq!(oid.to_string(), "1.3.6.1.4.1");
    ///
    /// assert!(Oid::parse("1.3.x").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut arcs = SmallVec::new();

        for part in s.split('.') {
            if part.is_empty() {
                continue;
            }

            let arc: u32 = part.parse().map_err(|e: std::num::ParseIntError| {
                let kind = match e.kind() {
                    IntErrorKind::PosOverflow => OidErrorKind::SubidentifierOverflow,
                    _ => OidErrorKind::InvalidArc,
                };
                Error::invalid_oid_with_input(kind, s.to_string())
            })?;

            arcs.push(arc);
        }

        Ok(Self { arcs })
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Validate OID arcs per X.690 Section 8.19.4.
    ///
    /// - arc1 must be 0, 1, or 2
    /// - arc2 must be <= 39 when arc1 is 0 or 1
    /// - (arc1 * 40) + arc2 must fit in a 32-bit subidentifier
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_packet::oid::Oid;
    ///
    /// assert!(Oid::from_slice(&[1, 3, 6, 1]).validate().is_ok());
    /// assert!(Oid::from_slice(&[3, 0]).validate().is_err());
    /// assert!(Oid::from_slice(&[0, 40]).validate().is_err());
    /// assert!(Oid::from_slice(&[2, 999]).validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let Some(&arc1) = self.arcs.first() else {
            return Ok(());
        };

        if arc1 > 2 {
            return Err(Error::invalid_oid(OidErrorKind::InvalidFirstArc(arc1)));
        }

        if let Some(&arc2) = self.arcs.get(1) {
            if arc1 < 2 && arc2 >= 40 {
                return Err(Error::invalid_oid(OidErrorKind::InvalidSecondArc {
                    first: arc1,
                    second: arc2,
                }));
            }
            if arc2.checked_add(arc1 * 40).is_none() {
                return Err(Error::invalid_oid(OidErrorKind::SubidentifierOverflow));
            }
        }

        Ok(())
    }

    /// Validate that the OID has at most `max` arcs.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_packet::oid::{Oid, MAX_OID_LEN};
    ///
    /// let oid = Oid::new(0..128);
    /// assert!(oid.validate_length(MAX_OID_LEN).is_ok());
    ///
    /// let oid = Oid::new(0..129);
    /// assert!(oid.validate_length(MAX_OID_LEN).is_err());
    /// ```
    pub fn validate_length(&self, max: usize) -> Result<()> {
        if self.arcs.len() > max {
            return Err(Error::OidTooLong {
                count: self.arcs.len(),
                max,
            });
        }
        Ok(())
    }

    /// Encode to BER content octets, returning bytes in a stack-allocated buffer.
    ///
    /// OID encoding (X.690 Section 8.19):
    /// - First two arcs encoded as (arc1 * 40) + arc2 using base-128
    /// - Remaining arcs encoded as base-128 variable length
    ///
    /// As in net-snmp, an empty OID encodes as a single `0x00` and a
    /// single-arc OID as `arc1 * 40`.
    pub fn to_ber_smallvec(&self) -> SmallVec<[u8; 64]> {
        let mut bytes = SmallVec::new();

        let first_subid = match self.arcs.as_slice() {
            [] => 0,
            [arc1] => u64::from(*arc1) * 40,
            [arc1, arc2, ..] => u64::from(*arc1) * 40 + u64::from(*arc2),
        };
        encode_subidentifier(&mut bytes, first_subid);

        for &arc in self.arcs.iter().skip(2) {
            encode_subidentifier(&mut bytes, u64::from(arc));
        }

        bytes
    }

    /// Encode to BER content octets.
    ///
    /// This method does not validate arc constraints. Use
    /// [`to_ber_checked()`](Self::to_ber_checked) for validation.
    pub fn to_ber(&self) -> Vec<u8> {
        self.to_ber_smallvec().to_vec()
    }

    /// Encode to BER content octets with validation.
    pub fn to_ber_checked(&self) -> Result<Vec<u8>> {
        self.validate()?;
        Ok(self.to_ber())
    }
}

/// Encode a subidentifier in base-128, most significant group first.
#[inline]
fn encode_subidentifier(bytes: &mut SmallVec<[u8; 64]>, value: u64) {
    if value == 0 {
        bytes.push(0);
        return;
    }

    // Count how many 7-bit groups we need
    let mut temp = value;
    let mut count = 0;
    while temp > 0 {
        count += 1;
        temp >>= 7;
    }

    for i in (0..count).rev() {
        let mut byte = ((value >> (i * 7)) & 0x7F) as u8;
        if i > 0 {
            byte |= 0x80; // Continuation bit
        }
        bytes.push(byte);
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(arcs: [u32; N]) -> Self {
        Self::new(arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

/// Macro to create an OID from literal arcs.
///
/// # Examples
///
/// ```
/// use snmp_packet::oid;
///
/// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
/// assert_eq!(sys_descr.to_string(), "1.3.6.1.2.1.1.1.0");
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}
