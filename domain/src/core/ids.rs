//! Identifier value objects
//!
//! Sessions, participants and ideas are addressed by UUID v4 newtypes so the
//! three id spaces cannot be mixed up. Sessions additionally carry a short,
//! human-friendly [`JoinCode`].

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim()).map(Self)
            }
        }
    };
}

uuid_id!(
    /// Identifier of a decision session
    SessionId
);
uuid_id!(
    /// Identifier of a participant
    ParticipantId
);
uuid_id!(
    /// Identifier of a submitted idea
    IdeaId
);

/// Characters used in join codes. `0 O 1 I L` are left out so codes can be
/// read aloud and typed without confusion.
const JOIN_CODE_ALPHABET: &[u8] = b"23456789ABCDEFGHJKMNPQRSTUVWXYZ";

/// Shortest accepted join code
pub const MIN_JOIN_CODE_LENGTH: usize = 4;
/// Longest accepted join code
pub const MAX_JOIN_CODE_LENGTH: usize = 12;

/// Short code participants type to find a session (Value Object)
///
/// # Example
///
/// ```
/// use idea_domain::JoinCode;
///
/// let code: JoinCode = "abc234".parse().unwrap();
/// assert_eq!(code.as_str(), "ABC234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JoinCode(String);

impl JoinCode {
    /// Generate a random join code of the given length
    ///
    /// The length is clamped to the accepted range.
    pub fn generate(length: usize) -> Self {
        let length = length.clamp(MIN_JOIN_CODE_LENGTH, MAX_JOIN_CODE_LENGTH);
        let mut rng = rand::thread_rng();
        let code = (0..length)
            .map(|_| JOIN_CODE_ALPHABET[rng.gen_range(0..JOIN_CODE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JoinCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for JoinCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        if !(MIN_JOIN_CODE_LENGTH..=MAX_JOIN_CODE_LENGTH).contains(&code.len()) {
            return Err(format!(
                "join code must be {}-{} characters",
                MIN_JOIN_CODE_LENGTH, MAX_JOIN_CODE_LENGTH
            ));
        }
        if let Some(c) = code.bytes().find(|b| !JOIN_CODE_ALPHABET.contains(b)) {
            return Err(format!("invalid character in join code: {}", c as char));
        }
        Ok(Self(code))
    }
}
