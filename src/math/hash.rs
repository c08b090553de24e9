const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: i32 = 16_777_619;

/// 32-bit hash of `data`: an FNV-1a fold followed by an avalanche mix.
///
/// Arithmetic wraps and right shifts are arithmetic (sign-extending), so the
/// result matches the same algorithm written over signed 32-bit integers.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn hash_bytes(data: &[u8]) -> i32 {
    let mut h = data.iter().fold(FNV_OFFSET_BASIS as i32, |h, &b| {
        (h ^ i32::from(b)).wrapping_mul(FNV_PRIME)
    });
    h = h.wrapping_add(h << 13);
    h ^= h >> 7;
    h = h.wrapping_add(h << 3);
    h ^= h >> 17;
    h.wrapping_add(h << 5)
}
