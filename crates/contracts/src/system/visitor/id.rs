use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of characters in a freshly generated visitor id.
pub const VISITOR_ID_LEN: usize = 5;

/// Characters a generated visitor id is drawn from.
pub const VISITOR_ID_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Anonymous identifier of a browser storage origin.
///
/// Values read back from storage are kept as-is, so a `VisitorId` is not
/// guaranteed to be canonical. Use [`VisitorId::is_canonical`] to check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorId(String);

impl VisitorId {
    /// Draws `VISITOR_ID_LEN` characters uniformly and independently from
    /// the alphanumeric alphabet. No uniqueness check is made.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value = (0..VISITOR_ID_LEN)
            .map(|_| VISITOR_ID_ALPHABET[rng.gen_range(0..VISITOR_ID_ALPHABET.len())] as char)
            .collect();
        Self(value)
    }

    /// Wraps a value previously written to storage.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// True when the id has the generated shape: five ASCII alphanumerics.
    pub fn is_canonical(&self) -> bool {
        self.0.len() == VISITOR_ID_LEN && self.0.bytes().all(|b| b.is_ascii_alphanumeric())
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VisitorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_have_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let id = VisitorId::generate(&mut rng);
            assert_eq!(id.as_str().len(), VISITOR_ID_LEN);
            assert!(id.as_str().bytes().all(|b| VISITOR_ID_ALPHABET.contains(&b)));
            assert!(id.is_canonical());
        }
    }

    #[test]
    fn test_generation_covers_whole_alphabet() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<char> = (0..5_000)
            .flat_map(|_| VisitorId::generate(&mut rng).into_inner().chars().collect::<Vec<_>>())
            .collect();
        assert_eq!(seen.len(), VISITOR_ID_ALPHABET.len());
    }

    #[test]
    fn test_same_seed_same_id() {
        let a = VisitorId::generate(&mut StdRng::seed_from_u64(1));
        let b = VisitorId::generate(&mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_canonical_values() {
        assert!(!VisitorId::from_stored("").is_canonical());
        assert!(!VisitorId::from_stored("abcd").is_canonical());
        assert!(!VisitorId::from_stored("abcdef").is_canonical());
        assert!(!VisitorId::from_stored("ab-de").is_canonical());
        assert!(!VisitorId::from_stored("abcdé").is_canonical());
        assert!(VisitorId::from_stored("Ab3x9").is_canonical());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = VisitorId::from_stored("Ab3x9");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Ab3x9\"");
    }
}
