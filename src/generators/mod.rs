//! Token and random value generators
//!
//! Nothing here reseeds a generator. The plain functions draw from the
//! thread-local generator returned by [`rand::rng`] (seeded once per thread
//! from the operating system) or, for UUIDs, straight from the OS entropy
//! source. Every generator also has a `*_with`/`*_from` form taking the
//! clock or generator as an argument, which keeps tests deterministic.

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};

use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::error::{Result, UtilBeltError};

/// Alphabet sampled by [`str_rand`]: ASCII lowercase then uppercase letters
pub const LETTERS: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Prefix hashed together with the timestamp in [`uniq`]
pub const UNIQ_PREFIX: &str = "utilbelt_";

/// Generate a unique-ish token from the current time
///
/// The token is the lowercase hex SHA-256 digest of [`UNIQ_PREFIX`]
/// followed by the nanosecond timestamp. Uniqueness comes only from the
/// clock: two calls within the same clock tick return the same token. Do
/// not use it as a secret or as a collision-free identifier; use [`uuid`]
/// for that.
pub fn uniq() -> String {
    uniq_with(&SystemClock)
}

/// Alias of [`uniq`]
pub fn unique() -> String {
    uniq()
}

/// [`uniq`] with an explicit time source
///
/// # Example
///
/// ```rust
/// use utilbelt::generators::{uniq_with, FixedClock};
///
/// let a = uniq_with(&FixedClock(1_700_000_000_000_000_000));
/// let b = uniq_with(&FixedClock(1_700_000_000_000_000_000));
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 64);
/// ```
pub fn uniq_with<C: Clock + ?Sized>(clock: &C) -> String {
    let seed = format!("{UNIQ_PREFIX}{}", clock.unix_nanos());
    hex::encode(Sha256::digest(seed.as_bytes()))
}

/// Generate a random string of `n` ASCII letters
///
/// # Example
///
/// ```rust
/// use utilbelt::generators::str_rand;
///
/// let s = str_rand(12);
/// assert_eq!(s.len(), 12);
/// assert!(s.chars().all(|c| c.is_ascii_alphabetic()));
/// ```
pub fn str_rand(n: usize) -> String {
    str_rand_with(&mut rand::rng(), n)
}

/// Alias of [`str_rand`]
pub fn rand_str(n: usize) -> String {
    str_rand(n)
}

/// Alias of [`str_rand`]
pub fn random_string(n: usize) -> String {
    str_rand(n)
}

/// [`str_rand`] drawing from a caller-supplied generator
pub fn str_rand_with<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    (0..n)
        .map(|_| {
            let idx = rng.random_range(0..LETTERS.len());
            char::from(LETTERS[idx])
        })
        .collect()
}

/// Generate a random (version 4) UUID
///
/// Returns an empty string when the OS entropy source fails; the failure
/// is logged at `warn` level. Use [`try_uuid`] to get the error instead.
///
/// # Example
///
/// ```rust
/// use utilbelt::generators::uuid;
///
/// let id = uuid();
/// assert_eq!(id.len(), 36);
/// assert_eq!(&id[14..15], "4");
/// ```
pub fn uuid() -> String {
    try_uuid().unwrap_or_else(|e| {
        warn!("UUID generation failed, returning empty string: {}", e);
        String::new()
    })
}

/// Generate a random UUID from the OS entropy source
///
/// # Errors
///
/// Returns [`UtilBeltError::Entropy`] when the OS cannot provide random
/// bytes.
pub fn try_uuid() -> Result<String> {
    uuid_from(&mut OsRng)
}

/// Build a version 4 UUID from 16 bytes of the given source
///
/// The version nibble is set to `0100` and the variant bits to `10`
/// (RFC 4122 section 4.1), and the result is formatted as lowercase
/// `xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx`.
///
/// # Errors
///
/// Returns [`UtilBeltError::Entropy`] when the source fails to fill the
/// buffer.
pub fn uuid_from<R: TryRngCore + ?Sized>(rng: &mut R) -> Result<String> {
    let mut bytes = [0u8; 16];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| UtilBeltError::Entropy(e.to_string()))?;

    Ok(::uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .hyphenated()
        .to_string())
}

/// Pick a random integer in `[min, max)`
///
/// # Errors
///
/// Returns [`UtilBeltError::InvalidRange`] when `min >= max`.
pub fn rand_range(min: i64, max: i64) -> Result<i64> {
    rand_range_with(&mut rand::rng(), min, max)
}

/// [`rand_range`] drawing from a caller-supplied generator
///
/// # Errors
///
/// Returns [`UtilBeltError::InvalidRange`] when `min >= max`.
pub fn rand_range_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> Result<i64> {
    if min >= max {
        return Err(UtilBeltError::InvalidRange { min, max });
    }
    Ok(rng.random_range(min..max))
}
