//! Narrow code points promoted to wide by a trailing U+FE0F (VS16).
//!
//! Generated from Unicode emoji-variation-sequences.txt by the offline
//! table build. Do not edit by hand; regenerate instead.

/// Version-independent narrow-to-wide promotion set (111 ranges).
pub static VS16_NARROW_TO_WIDE: &[(u32, u32)] = &[
    (0x000A9, 0x000A9), (0x000AE, 0x000AE), (0x0203C, 0x0203C),
    (0x02049, 0x02049), (0x02122, 0x02122), (0x02139, 0x02139),
    (0x02194, 0x02199), (0x021A9, 0x021AA), (0x02328, 0x02328),
    (0x023CF, 0x023CF), (0x023ED, 0x023EF), (0x023F1, 0x023F2),
    (0x023F8, 0x023FA), (0x024C2, 0x024C2), (0x025AA, 0x025AB),
    (0x025B6, 0x025B6), (0x025C0, 0x025C0), (0x025FB, 0x025FC),
    (0x02600, 0x02604), (0x0260E, 0x0260E), (0x02611, 0x02611),
    (0x02618, 0x02618), (0x0261D, 0x0261D), (0x02620, 0x02620),
    (0x02622, 0x02623), (0x02626, 0x02626), (0x0262A, 0x0262A),
    (0x0262E, 0x0262F), (0x02638, 0x0263A), (0x02640, 0x02640),
    (0x02642, 0x02642), (0x0265F, 0x02660), (0x02663, 0x02663),
    (0x02665, 0x02666), (0x02668, 0x02668), (0x0267B, 0x0267B),
    (0x0267E, 0x0267E), (0x02692, 0x02697), (0x02699, 0x02699),
    (0x0269B, 0x0269C), (0x026A0, 0x026A0), (0x026A7, 0x026A7),
    (0x026B0, 0x026B1), (0x026C8, 0x026C8), (0x026CF, 0x026CF),
    (0x026D1, 0x026D1), (0x026D3, 0x026D3), (0x026E9, 0x026E9),
    (0x026F0, 0x026F1), (0x026F4, 0x026F4), (0x026F7, 0x026F9),
    (0x02702, 0x02702), (0x02708, 0x02709), (0x0270C, 0x0270D),
    (0x0270F, 0x0270F), (0x02712, 0x02712), (0x02714, 0x02714),
    (0x02716, 0x02716), (0x0271D, 0x0271D), (0x02721, 0x02721),
    (0x02733, 0x02734), (0x02744, 0x02744), (0x02747, 0x02747),
    (0x02763, 0x02764), (0x027A1, 0x027A1), (0x02934, 0x02935),
    (0x02B05, 0x02B07), (0x03030, 0x03030), (0x0303D, 0x0303D),
    (0x03297, 0x03297), (0x03299, 0x03299), (0x1F170, 0x1F171),
    (0x1F17E, 0x1F17F), (0x1F321, 0x1F32C), (0x1F336, 0x1F336),
    (0x1F37D, 0x1F37D), (0x1F396, 0x1F397), (0x1F399, 0x1F39B),
    (0x1F39E, 0x1F39F), (0x1F3CB, 0x1F3CE), (0x1F3D4, 0x1F3DF),
    (0x1F3F3, 0x1F3F3), (0x1F3F5, 0x1F3F7), (0x1F43F, 0x1F43F),
    (0x1F441, 0x1F441), (0x1F4FD, 0x1F4FD), (0x1F549, 0x1F54A),
    (0x1F56F, 0x1F570), (0x1F573, 0x1F579), (0x1F587, 0x1F587),
    (0x1F58A, 0x1F58D), (0x1F590, 0x1F590), (0x1F5A5, 0x1F5A5),
    (0x1F5A8, 0x1F5A8), (0x1F5B1, 0x1F5B2), (0x1F5BC, 0x1F5BC),
    (0x1F5C2, 0x1F5C4), (0x1F5D1, 0x1F5D3), (0x1F5DC, 0x1F5DE),
    (0x1F5E1, 0x1F5E1), (0x1F5E3, 0x1F5E3), (0x1F5E8, 0x1F5E8),
    (0x1F5EF, 0x1F5EF), (0x1F5F3, 0x1F5F3), (0x1F5FA, 0x1F5FA),
    (0x1F6CB, 0x1F6CB), (0x1F6CD, 0x1F6CF), (0x1F6E0, 0x1F6E5),
    (0x1F6E9, 0x1F6E9), (0x1F6F0, 0x1F6F0), (0x1F6F3, 0x1F6F3),
];
