//! ASCII case mappings backed by 256-entry lookup tables
//!
//! The tables are module-level immutable data and part of the stable
//! byte-level contract, including their behavior outside the `[A-Z]`/`[a-z]`
//! ranges: the uppercase table folds pre-existing uppercase letters down, and
//! 215/223/247 are fixed points of both tables. These are strictly byte-wise
//! ASCII helpers; no locale or Unicode awareness is intended.

/// Lowercase mapping table. Bytes outside the letter ranges pass through.
static LOWERED: [u8; 256] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, //
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, //
    48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, //
    64, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, //
    112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 91, 92, 93, 94, 95, //
    96, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, //
    112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 123, 124, 125, 126, 127, //
    128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, //
    144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, //
    160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175, //
    176, 177, 178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191, //
    224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234, 235, 236, 237, 238, 239, //
    240, 241, 242, 243, 244, 245, 246, 215, 248, 249, 250, 251, 252, 253, 254, 223, //
    224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234, 235, 236, 237, 238, 239, //
    240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253, 254, 255, //
];

/// Uppercase mapping table. The 64..95 rows mirror the lowercase table, so
/// pre-existing uppercase letters fold down; only lowercase letters come out
/// uppercased.
static UPPED: [u8; 256] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, //
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, //
    32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, //
    48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, //
    64, 97, 98, 99, 100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, //
    112, 113, 114, 115, 116, 117, 118, 119, 120, 121, 122, 91, 92, 93, 94, 95, //
    96, 65, 66, 67, 68, 69, 70, 71, 72, 73, 74, 75, 76, 77, 78, 79, //
    80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 123, 124, 125, 126, 127, //
    128, 129, 130, 131, 132, 133, 134, 135, 136, 137, 138, 139, 140, 141, 142, 143, //
    144, 145, 146, 147, 148, 149, 150, 151, 152, 153, 154, 155, 156, 157, 158, 159, //
    160, 161, 162, 163, 164, 165, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175, //
    176, 177, 178, 179, 180, 181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191, //
    224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234, 235, 236, 237, 238, 239, //
    240, 241, 242, 243, 244, 245, 246, 215, 248, 249, 250, 251, 252, 253, 254, 223, //
    224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234, 235, 236, 237, 238, 239, //
    240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253, 254, 255, //
];

/// Map a single byte through the lowercase table.
#[inline(always)]
pub fn lower_byte(byte: u8) -> u8 {
    LOWERED[byte as usize]
}

/// Map a single byte through the uppercase table.
#[inline(always)]
pub fn upper_byte(byte: u8) -> u8 {
    UPPED[byte as usize]
}

/// Strip a byte to 7-bit ASCII.
#[inline(always)]
pub fn ascii_byte(byte: u8) -> u8 {
    byte & 0x7F
}

/// Lowercase `text` into `result`. Both slices must have the same length.
pub fn to_lower(text: &[u8], result: &mut [u8]) {
    debug_assert_eq!(text.len(), result.len());
    for (out, &byte) in result.iter_mut().zip(text) {
        *out = LOWERED[byte as usize];
    }
}

/// Uppercase `text` into `result`. Both slices must have the same length.
pub fn to_upper(text: &[u8], result: &mut [u8]) {
    debug_assert_eq!(text.len(), result.len());
    for (out, &byte) in result.iter_mut().zip(text) {
        *out = UPPED[byte as usize];
    }
}

/// Strip `text` to 7-bit ASCII into `result`. Both slices must have the same length.
pub fn to_ascii(text: &[u8], result: &mut [u8]) {
    debug_assert_eq!(text.len(), result.len());
    for (out, &byte) in result.iter_mut().zip(text) {
        *out = byte & 0x7F;
    }
}

/// Lowercase a buffer in place.
pub fn to_lower_in_place(text: &mut [u8]) {
    for byte in text.iter_mut() {
        *byte = LOWERED[*byte as usize];
    }
}

/// Uppercase a buffer in place.
pub fn to_upper_in_place(text: &mut [u8]) {
    for byte in text.iter_mut() {
        *byte = UPPED[*byte as usize];
    }
}

/// Strip a buffer to 7-bit ASCII in place.
pub fn to_ascii_in_place(text: &mut [u8]) {
    for byte in text.iter_mut() {
        *byte &= 0x7F;
    }
}
