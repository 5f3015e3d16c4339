//! Hash functions fed to [`Store`](super::Store) by its callers.

/// Szudzik's elegant pairing of two coordinates into one hash.
///
/// Both inputs are reinterpreted bit-for-bit as unsigned before combining,
/// so negative coordinates spread across the full range instead of being
/// rejected. Arithmetic wraps.
pub const fn hash_coordinate(x: i64, y: i64) -> u64 {
    let ux = x as u64;
    let uy = y as u64;
    if ux >= uy {
        ux.wrapping_mul(ux).wrapping_add(ux).wrapping_add(uy)
    } else {
        ux.wrapping_add(uy.wrapping_mul(uy))
    }
}

#[inline]
fn get16(bytes: &[u8]) -> u32 {
    u32::from(bytes[0]) | (u32::from(bytes[1]) << 8)
}

/// Paul Hsieh's SuperFastHash over a byte string.
///
/// Trailing bytes are sign-extended, matching the common C reference.
pub fn super_fast_hash(data: &[u8]) -> u32 {
    if data.is_empty() {
        return 0;
    }

    let mut hash = data.len() as u32;
    let mut words = data.chunks_exact(4);
    for word in &mut words {
        hash = hash.wrapping_add(get16(&word[0..2]));
        let tmp = (get16(&word[2..4]) << 11) ^ hash;
        hash = (hash << 16) ^ tmp;
        hash = hash.wrapping_add(hash >> 11);
    }

    let rest = words.remainder();
    match rest.len() {
        3 => {
            hash = hash.wrapping_add(get16(rest));
            hash ^= hash << 16;
            hash ^= ((rest[2] as i8) as u32) << 18;
            hash = hash.wrapping_add(hash >> 11);
        }
        2 => {
            hash = hash.wrapping_add(get16(rest));
            hash ^= hash << 11;
            hash = hash.wrapping_add(hash >> 17);
        }
        1 => {
            hash = hash.wrapping_add((rest[0] as i8) as u32);
            hash ^= hash << 10;
            hash = hash.wrapping_add(hash >> 1);
        }
        _ => {}
    }

    // Final avalanche.
    hash ^= hash << 3;
    hash = hash.wrapping_add(hash >> 5);
    hash ^= hash << 4;
    hash = hash.wrapping_add(hash >> 17);
    hash ^= hash << 25;
    hash = hash.wrapping_add(hash >> 6);
    hash
}
