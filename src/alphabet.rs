use crate::CipherForgeError;
use fastrand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A candidate decryption key.
///
/// Stores a permutation of the plain alphabet indexed by cipher-letter
/// position: `letters[0]` is the plain letter that ciphertext 'A' decodes to.
/// Every constructor and operator on this type preserves the permutation
/// invariant (each letter appears exactly once).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    letters: [u8; ALPHABET_LEN],
}

impl Alphabet {
    /// The key that decodes every letter to itself.
    pub fn identity() -> Self {
        let mut letters = [0u8; ALPHABET_LEN];
        for (i, l) in letters.iter_mut().enumerate() {
            *l = b'A' + i as u8;
        }
        Self { letters }
    }

    /// A uniform-random permutation drawn from `rng`.
    pub fn random(rng: &mut Rng) -> Self {
        let mut key = Self::identity();
        rng.shuffle(&mut key.letters);
        key
    }

    /// The key that undoes this one: `inv.decode_letter(self.decode_letter(c)) == c`.
    pub fn inverse(&self) -> Self {
        let mut letters = [0u8; ALPHABET_LEN];
        for (i, &l) in self.letters.iter().enumerate() {
            letters[(l - b'A') as usize] = b'A' + i as u8;
        }
        Self { letters }
    }

    /// Plain letter for an uppercase cipher letter. Callers guarantee
    /// `c` is in `A..=Z`.
    #[inline(always)]
    pub fn decode_letter(&self, c: u8) -> u8 {
        self.letters[(c - b'A') as usize]
    }

    /// Swap the letters at two key positions. Any pair of positions keeps
    /// the key a valid permutation.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.letters.swap(i, j);
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; ALPHABET_LEN] {
        &self.letters
    }

    /// True if every letter of `A..=Z` appears exactly once.
    pub fn is_permutation(letters: &[u8; ALPHABET_LEN]) -> bool {
        let mut seen = [false; ALPHABET_LEN];
        for &l in letters {
            if !l.is_ascii_uppercase() {
                return false;
            }
            let idx = (l - b'A') as usize;
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        true
    }

    /// Internal constructor for operators that guarantee the invariant
    /// structurally (checked in debug builds).
    pub(crate) fn from_letters_unchecked(letters: [u8; ALPHABET_LEN]) -> Self {
        debug_assert!(Self::is_permutation(&letters));
        Self { letters }
    }

    /// Build from raw letters, checking the permutation invariant.
    pub fn from_letters(letters: [u8; ALPHABET_LEN]) -> Result<Self, CipherForgeError> {
        if !Self::is_permutation(&letters) {
            return Err(CipherForgeError::Validation(format!(
                "'{}' is not a permutation of A-Z",
                String::from_utf8_lossy(&letters)
            )));
        }
        Ok(Self { letters })
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // letters are always ASCII uppercase
        f.write_str(std::str::from_utf8(&self.letters).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Alphabet {
    type Err = CipherForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bytes = upper.as_bytes();
        if bytes.len() != ALPHABET_LEN {
            return Err(CipherForgeError::Validation(format!(
                "Key must be {} letters, got {}",
                ALPHABET_LEN,
                bytes.len()
            )));
        }
        let mut letters = [0u8; ALPHABET_LEN];
        letters.copy_from_slice(bytes);
        Self::from_letters(letters)
    }
}
