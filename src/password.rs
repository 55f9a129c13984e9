use crate::error::{self, Result};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::{CryptoRng, RngCore};

pub fn hash(password: &str, rng: &mut (impl RngCore + CryptoRng)) -> Result<String> {
    let salt = SaltString::generate(rng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|error| {
            error!("failed to hash password: {error}");
            error::INTERNAL
        })
}

/// Malformed stored hashes count as a mismatch.
pub fn verify(password: &str, hash: &str) -> bool {
    let Ok(hash) = PasswordHash::new(hash) else {
        warn!("stored password hash is not a valid PHC string");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn verifies_own_hash() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let hash = hash("hunter22", &mut rng).unwrap();

        assert!(verify("hunter22", &hash));
        assert!(!verify("hunter23", &hash));
    }

    #[test]
    fn salts_differ() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);

        let first = hash("hunter22", &mut rng).unwrap();
        let second = hash("hunter22", &mut rng).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn garbage_hash_does_not_verify() {
        assert!(!verify("hunter22", "not a hash"));
    }
}
