//! Word colours
//!
//! Colours are taken from the viridis colour map. The choice depends only on
//! the word, so a re-run with the same input draws the same picture.

/// Ten evenly spaced stops of viridis
pub const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];

/// Colour for a word
pub fn color_for(word: &str) -> &'static str {
    VIRIDIS[(fnv1a(word.as_bytes()) % VIRIDIS.len() as u64) as usize]
}

/// 64-bit FNV-1a
pub(crate) fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    bytes.iter().fold(OFFSET, |hash, &b| (hash ^ b as u64).wrapping_mul(PRIME))
}
