//! Family codes and roster defaults.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{DayleeError, DayleeResult};

/// Length of generated codes, and the longest code accepted when joining.
pub const FAMILY_CODE_LEN: usize = 6;

const CODE_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Name given to a family that was joined by code.
pub const JOINED_FAMILY_NAME: &str = "Family Calendar";

/// Active member used when a roster is empty.
pub const PLACEHOLDER_MEMBER: &str = "You";

/// Roster fabricated when joining by code. There is no server to ask for the
/// real one.
pub fn joined_roster() -> Vec<String> {
    vec![PLACEHOLDER_MEMBER.to_string(), "Family Member".to_string()]
}

/// Short uppercase alphanumeric code identifying a family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FamilyCode(String);

impl FamilyCode {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..FAMILY_CODE_LEN)
            .filter_map(|_| {
                CODE_ALPHABET
                    .get(rng.random_range(0..CODE_ALPHABET.len()))
                    .map(|b| char::from(*b))
            })
            .collect();
        FamilyCode(code)
    }

    /// Parse a code typed by a user: trimmed and upper-cased, then checked
    /// for shape only.
    pub fn parse(input: &str) -> DayleeResult<Self> {
        let code = input.trim().to_uppercase();

        if code.is_empty() {
            return Err(DayleeError::EmptyFamilyCode);
        }
        if code.chars().count() > FAMILY_CODE_LEN || !code.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(DayleeError::InvalidFamilyCode(input.trim().to_string()));
        }

        Ok(FamilyCode(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FamilyCode {
    type Err = DayleeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FamilyCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
