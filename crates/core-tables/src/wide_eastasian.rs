//! East Asian Wide and Fullwidth code points per Unicode release.
//!
//! Generated from Unicode Character Database releases by the offline
//! table build. Do not edit by hand; regenerate instead.

/// Unicode 4.1.0 (32 ranges).
pub static WIDE_EASTASIAN_4_1_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031CF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FBB),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x20000, 0x2A6D6), (0x2F800, 0x2FA1D),
];

/// Unicode 5.0.0 (32 ranges).
pub static WIDE_EASTASIAN_5_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031CF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FBB),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x20000, 0x2A6D6), (0x2F800, 0x2FA1D),
];

/// Unicode 5.1.0 (32 ranges).
pub static WIDE_EASTASIAN_5_1_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FC3),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x20000, 0x2A6D6), (0x2F800, 0x2FA1D),
];

/// Unicode 5.2.0 (36 ranges).
pub static WIDE_EASTASIAN_5_2_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FC6),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x1F200, 0x1F200), (0x1F210, 0x1F231), (0x1F240, 0x1F248),
    (0x20000, 0x2A6D6), (0x2A700, 0x2B734), (0x2F800, 0x2FA1D),
];

/// Unicode 6.0.0 (39 ranges).
pub static WIDE_EASTASIAN_6_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FCB),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x1B000, 0x1B001), (0x1F200, 0x1F202), (0x1F210, 0x1F23A),
    (0x1F240, 0x1F248), (0x1F250, 0x1F251), (0x20000, 0x2A6D6),
    (0x2A700, 0x2B734), (0x2B740, 0x2B81D), (0x2F800, 0x2FA1D),
];

/// Unicode 6.1.0 (39 ranges).
pub static WIDE_EASTASIAN_6_1_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FCC),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x1B000, 0x1B001), (0x1F200, 0x1F202), (0x1F210, 0x1F23A),
    (0x1F240, 0x1F248), (0x1F250, 0x1F251), (0x20000, 0x2A6D6),
    (0x2A700, 0x2B734), (0x2B740, 0x2B81D), (0x2F800, 0x2FA1D),
];

/// Unicode 7.0.0 (39 ranges).
pub static WIDE_EASTASIAN_7_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FCC),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x1B000, 0x1B001), (0x1F200, 0x1F202), (0x1F210, 0x1F23A),
    (0x1F240, 0x1F248), (0x1F250, 0x1F251), (0x20000, 0x2A6D6),
    (0x2A700, 0x2B734), (0x2B740, 0x2B81D), (0x2F800, 0x2FA1D),
];

/// Unicode 8.0.0 (40 ranges).
pub static WIDE_EASTASIAN_8_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FD5),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x1B000, 0x1B001), (0x1F200, 0x1F202), (0x1F210, 0x1F23A),
    (0x1F240, 0x1F248), (0x1F250, 0x1F251), (0x20000, 0x2A6D6),
    (0x2A700, 0x2B734), (0x2B740, 0x2B81D), (0x2B820, 0x2CEA1),
    (0x2F800, 0x2FA1D),
];

/// Unicode 9.0.0 (78 ranges).
pub static WIDE_EASTASIAN_9_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FD5),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x16FE0, 0x16FE0), (0x17000, 0x187EC), (0x18800, 0x18AF2),
    (0x1B000, 0x1B001), (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F200, 0x1F202),
    (0x1F210, 0x1F23A), (0x1F240, 0x1F248), (0x1F250, 0x1F251),
    (0x1F300, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2),
    (0x1F6EB, 0x1F6EC), (0x1F6F4, 0x1F6F6), (0x1F910, 0x1F91E),
    (0x1F920, 0x1F927), (0x1F930, 0x1F930), (0x1F933, 0x1F93E),
    (0x1F940, 0x1F94B), (0x1F950, 0x1F95E), (0x1F980, 0x1F991),
    (0x1F9C0, 0x1F9C0), (0x20000, 0x2A6D6), (0x2A700, 0x2B734),
    (0x2B740, 0x2B81D), (0x2B820, 0x2CEA1), (0x2F800, 0x2FA1D),
];

/// Unicode 10.0.0 (77 ranges).
pub static WIDE_EASTASIAN_10_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FEA),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x16FE0, 0x16FE1), (0x17000, 0x187EC), (0x18800, 0x18AF2),
    (0x1B000, 0x1B001), (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F200, 0x1F202),
    (0x1F210, 0x1F23A), (0x1F240, 0x1F248), (0x1F250, 0x1F251),
    (0x1F300, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2),
    (0x1F6EB, 0x1F6EC), (0x1F6F4, 0x1F6F8), (0x1F910, 0x1F93E),
    (0x1F940, 0x1F94C), (0x1F950, 0x1F96B), (0x1F980, 0x1F997),
    (0x1F9C0, 0x1F9C0), (0x1F9D0, 0x1F9E6), (0x20000, 0x2A6D6),
    (0x2A700, 0x2B734), (0x2B740, 0x2B81D), (0x2B820, 0x2CEA1),
    (0x2CEB0, 0x2EBE0), (0x2F800, 0x2FA1D),
];

/// Unicode 11.0.0 (79 ranges).
pub static WIDE_EASTASIAN_11_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FEF),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x16FE0, 0x16FE1), (0x17000, 0x187EC), (0x18800, 0x18AF2),
    (0x1B000, 0x1B001), (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F200, 0x1F202),
    (0x1F210, 0x1F23A), (0x1F240, 0x1F248), (0x1F250, 0x1F251),
    (0x1F300, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2),
    (0x1F6EB, 0x1F6EC), (0x1F6F4, 0x1F6F9), (0x1F910, 0x1F93E),
    (0x1F940, 0x1F970), (0x1F973, 0x1F976), (0x1F97A, 0x1F97A),
    (0x1F97C, 0x1F9A2), (0x1F9B0, 0x1F9B9), (0x1F9C0, 0x1F9C2),
    (0x1F9D0, 0x1F9FF), (0x20000, 0x2A6D6), (0x2A700, 0x2B734),
    (0x2B740, 0x2B81D), (0x2B820, 0x2CEA1), (0x2CEB0, 0x2EBE0),
    (0x2F800, 0x2FA1D),
];

/// Unicode 12.0.0 (84 ranges).
pub static WIDE_EASTASIAN_12_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x032FE), (0x03300, 0x04DB5), (0x04E00, 0x09FEF),
    (0x0A000, 0x0A48C), (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3),
    (0x0F900, 0x0FA2D), (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9),
    (0x0FE10, 0x0FE19), (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66),
    (0x0FE68, 0x0FE6B), (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6),
    (0x16FE0, 0x16FE1), (0x17000, 0x187EC), (0x18800, 0x18AF2),
    (0x1B000, 0x1B001), (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F200, 0x1F202),
    (0x1F210, 0x1F23A), (0x1F240, 0x1F248), (0x1F250, 0x1F251),
    (0x1F300, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D5), (0x1F6EB, 0x1F6EC), (0x1F6F4, 0x1F6FA),
    (0x1F7E0, 0x1F7EB), (0x1F90D, 0x1F93E), (0x1F940, 0x1F971),
    (0x1F973, 0x1F976), (0x1F97A, 0x1F9A2), (0x1F9A5, 0x1F9AA),
    (0x1F9AE, 0x1F9CA), (0x1F9D0, 0x1F9FF), (0x1FA70, 0x1FA73),
    (0x1FA78, 0x1FA7A), (0x1FA80, 0x1FA82), (0x1FA90, 0x1FA95),
    (0x20000, 0x2A6D6), (0x2A700, 0x2B734), (0x2B740, 0x2B81D),
    (0x2B820, 0x2CEA1), (0x2CEB0, 0x2EBE0), (0x2F800, 0x2FA1D),
];

/// Unicode 12.1.0 (83 ranges).
pub static WIDE_EASTASIAN_12_1_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x04DB5), (0x04E00, 0x09FEF), (0x0A000, 0x0A48C),
    (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3), (0x0F900, 0x0FA2D),
    (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9), (0x0FE10, 0x0FE19),
    (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66), (0x0FE68, 0x0FE6B),
    (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6), (0x16FE0, 0x16FE1),
    (0x17000, 0x187EC), (0x18800, 0x18AF2), (0x1B000, 0x1B001),
    (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF), (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A), (0x1F200, 0x1F202), (0x1F210, 0x1F23A),
    (0x1F240, 0x1F248), (0x1F250, 0x1F251), (0x1F300, 0x1F320),
    (0x1F32D, 0x1F335), (0x1F337, 0x1F37C), (0x1F37E, 0x1F393),
    (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3), (0x1F3E0, 0x1F3F0),
    (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E), (0x1F440, 0x1F440),
    (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D), (0x1F54B, 0x1F54E),
    (0x1F550, 0x1F567), (0x1F57A, 0x1F57A), (0x1F595, 0x1F596),
    (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F), (0x1F680, 0x1F6C5),
    (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2), (0x1F6D5, 0x1F6D5),
    (0x1F6EB, 0x1F6EC), (0x1F6F4, 0x1F6FA), (0x1F7E0, 0x1F7EB),
    (0x1F90D, 0x1F93E), (0x1F940, 0x1F971), (0x1F973, 0x1F976),
    (0x1F97A, 0x1F9A2), (0x1F9A5, 0x1F9AA), (0x1F9AE, 0x1F9CA),
    (0x1F9D0, 0x1F9FF), (0x1FA70, 0x1FA73), (0x1FA78, 0x1FA7A),
    (0x1FA80, 0x1FA82), (0x1FA90, 0x1FA95), (0x20000, 0x2A6D6),
    (0x2A700, 0x2B734), (0x2B740, 0x2B81D), (0x2B820, 0x2CEA1),
    (0x2CEB0, 0x2EBE0), (0x2F800, 0x2FA1D),
];

/// Unicode 13.0.0 (85 ranges).
pub static WIDE_EASTASIAN_13_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x04DB5), (0x04E00, 0x09FEF), (0x0A000, 0x0A48C),
    (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3), (0x0F900, 0x0FA2D),
    (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9), (0x0FE10, 0x0FE19),
    (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66), (0x0FE68, 0x0FE6B),
    (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6), (0x16FE0, 0x16FE1),
    (0x16FE3, 0x16FE3), (0x17000, 0x187EC), (0x18800, 0x18AF2),
    (0x1B000, 0x1B001), (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F200, 0x1F202),
    (0x1F210, 0x1F23A), (0x1F240, 0x1F248), (0x1F250, 0x1F251),
    (0x1F300, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D7), (0x1F6EB, 0x1F6EC), (0x1F6F4, 0x1F6FC),
    (0x1F7E0, 0x1F7EB), (0x1F90C, 0x1F93E), (0x1F940, 0x1F978),
    (0x1F97A, 0x1F9CB), (0x1F9D0, 0x1F9FF), (0x1FA70, 0x1FA74),
    (0x1FA78, 0x1FA7A), (0x1FA80, 0x1FA86), (0x1FA90, 0x1FAA8),
    (0x1FAB0, 0x1FAB6), (0x1FAC0, 0x1FAC2), (0x1FAD0, 0x1FAD6),
    (0x20000, 0x2A6D6), (0x2A700, 0x2B734), (0x2B740, 0x2B81D),
    (0x2B820, 0x2CEA1), (0x2CEB0, 0x2EBE0), (0x2F800, 0x2FA1D),
    (0x30000, 0x3134A),
];

/// Unicode 14.0.0 (88 ranges).
pub static WIDE_EASTASIAN_14_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x04DB5), (0x04E00, 0x09FEF), (0x0A000, 0x0A48C),
    (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3), (0x0F900, 0x0FA2D),
    (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9), (0x0FE10, 0x0FE19),
    (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66), (0x0FE68, 0x0FE6B),
    (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6), (0x16FE0, 0x16FE1),
    (0x16FE3, 0x16FE3), (0x17000, 0x187EC), (0x18800, 0x18AF2),
    (0x1B000, 0x1B001), (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F200, 0x1F202),
    (0x1F210, 0x1F23A), (0x1F240, 0x1F248), (0x1F250, 0x1F251),
    (0x1F300, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D7), (0x1F6DD, 0x1F6DF), (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC), (0x1F7E0, 0x1F7EB), (0x1F7F0, 0x1F7F0),
    (0x1F90C, 0x1F93E), (0x1F940, 0x1F9CC), (0x1F9D0, 0x1F9FF),
    (0x1FA70, 0x1FA74), (0x1FA78, 0x1FA7A), (0x1FA80, 0x1FA86),
    (0x1FA90, 0x1FAAC), (0x1FAB0, 0x1FABA), (0x1FAC0, 0x1FAC5),
    (0x1FAD0, 0x1FAD9), (0x1FAE0, 0x1FAE7), (0x1FAF0, 0x1FAF6),
    (0x20000, 0x2A6D6), (0x2A700, 0x2B734), (0x2B740, 0x2B81D),
    (0x2B820, 0x2CEA1), (0x2CEB0, 0x2EBE0), (0x2F800, 0x2FA1D),
    (0x30000, 0x3134A),
];

/// Unicode 15.0.0 (87 ranges).
pub static WIDE_EASTASIAN_15_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x04DB5), (0x04E00, 0x09FEF), (0x0A000, 0x0A48C),
    (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3), (0x0F900, 0x0FA2D),
    (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9), (0x0FE10, 0x0FE19),
    (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66), (0x0FE68, 0x0FE6B),
    (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6), (0x16FE0, 0x16FE1),
    (0x16FE3, 0x16FE3), (0x17000, 0x187EC), (0x18800, 0x18AF2),
    (0x1B000, 0x1B001), (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F200, 0x1F202),
    (0x1F210, 0x1F23A), (0x1F240, 0x1F248), (0x1F250, 0x1F251),
    (0x1F300, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D7), (0x1F6DC, 0x1F6DF), (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC), (0x1F7E0, 0x1F7EB), (0x1F7F0, 0x1F7F0),
    (0x1F90C, 0x1F93E), (0x1F940, 0x1F9CC), (0x1F9D0, 0x1F9FF),
    (0x1FA70, 0x1FA7A), (0x1FA80, 0x1FA88), (0x1FA90, 0x1FABD),
    (0x1FABF, 0x1FAC5), (0x1FACE, 0x1FADB), (0x1FAE0, 0x1FAE8),
    (0x1FAF0, 0x1FAF8), (0x20000, 0x2A6D6), (0x2A700, 0x2B734),
    (0x2B740, 0x2B81D), (0x2B820, 0x2CEA1), (0x2CEB0, 0x2EBE0),
    (0x2F800, 0x2FA1D), (0x30000, 0x3134A), (0x31350, 0x323AF),
];

/// Unicode 15.1.0 (88 ranges).
pub static WIDE_EASTASIAN_15_1_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x04DB5), (0x04E00, 0x09FEF), (0x0A000, 0x0A48C),
    (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3), (0x0F900, 0x0FA2D),
    (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9), (0x0FE10, 0x0FE19),
    (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66), (0x0FE68, 0x0FE6B),
    (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6), (0x16FE0, 0x16FE1),
    (0x16FE3, 0x16FE3), (0x17000, 0x187EC), (0x18800, 0x18AF2),
    (0x1B000, 0x1B001), (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F200, 0x1F202),
    (0x1F210, 0x1F23A), (0x1F240, 0x1F248), (0x1F250, 0x1F251),
    (0x1F300, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D7), (0x1F6DC, 0x1F6DF), (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC), (0x1F7E0, 0x1F7EB), (0x1F7F0, 0x1F7F0),
    (0x1F90C, 0x1F93E), (0x1F940, 0x1F9CC), (0x1F9D0, 0x1F9FF),
    (0x1FA70, 0x1FA7A), (0x1FA80, 0x1FA88), (0x1FA90, 0x1FABD),
    (0x1FABF, 0x1FAC5), (0x1FACE, 0x1FADB), (0x1FAE0, 0x1FAE8),
    (0x1FAF0, 0x1FAF8), (0x20000, 0x2A6D6), (0x2A700, 0x2B734),
    (0x2B740, 0x2B81D), (0x2B820, 0x2CEA1), (0x2CEB0, 0x2EBE0),
    (0x2EBF0, 0x2EE5D), (0x2F800, 0x2FA1D), (0x30000, 0x3134A),
    (0x31350, 0x323AF),
];

/// Unicode 16.0.0 (87 ranges).
pub static WIDE_EASTASIAN_16_0_0: &[(u32, u32)] = &[
    (0x01100, 0x0115F), (0x02329, 0x0232A), (0x02E80, 0x02E99),
    (0x02E9B, 0x02EF3), (0x02F00, 0x02FD5), (0x02FF0, 0x02FFB),
    (0x03000, 0x0303E), (0x03041, 0x03096), (0x03099, 0x030FF),
    (0x03105, 0x0312C), (0x03131, 0x0318E), (0x03190, 0x031B7),
    (0x031C0, 0x031DF), (0x031F0, 0x0321E), (0x03220, 0x03243),
    (0x03250, 0x04DB5), (0x04E00, 0x09FEF), (0x0A000, 0x0A48C),
    (0x0A490, 0x0A4C6), (0x0AC00, 0x0D7A3), (0x0F900, 0x0FA2D),
    (0x0FA30, 0x0FA6A), (0x0FA70, 0x0FAD9), (0x0FE10, 0x0FE19),
    (0x0FE30, 0x0FE52), (0x0FE54, 0x0FE66), (0x0FE68, 0x0FE6B),
    (0x0FF00, 0x0FF60), (0x0FFE0, 0x0FFE6), (0x16FE0, 0x16FE1),
    (0x16FE3, 0x16FE3), (0x17000, 0x187EC), (0x18800, 0x18AF2),
    (0x1B000, 0x1B001), (0x1F004, 0x1F004), (0x1F0CF, 0x1F0CF),
    (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F200, 0x1F202),
    (0x1F210, 0x1F23A), (0x1F240, 0x1F248), (0x1F250, 0x1F251),
    (0x1F300, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3),
    (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4), (0x1F3F8, 0x1F43E),
    (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D),
    (0x1F54B, 0x1F54E), (0x1F550, 0x1F567), (0x1F57A, 0x1F57A),
    (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2),
    (0x1F6D5, 0x1F6D7), (0x1F6DC, 0x1F6DF), (0x1F6EB, 0x1F6EC),
    (0x1F6F4, 0x1F6FC), (0x1F7E0, 0x1F7EB), (0x1F7F0, 0x1F7F0),
    (0x1F90C, 0x1F93E), (0x1F940, 0x1F9CC), (0x1F9D0, 0x1F9FF),
    (0x1FA70, 0x1FA7A), (0x1FA80, 0x1FA89), (0x1FA8F, 0x1FAC6),
    (0x1FACE, 0x1FADC), (0x1FADF, 0x1FAE9), (0x1FAF0, 0x1FAF8),
    (0x20000, 0x2A6D6), (0x2A700, 0x2B734), (0x2B740, 0x2B81D),
    (0x2B820, 0x2CEA1), (0x2CEB0, 0x2EBE0), (0x2EBF0, 0x2EE5D),
    (0x2F800, 0x2FA1D), (0x30000, 0x3134A), (0x31350, 0x323AF),
];
