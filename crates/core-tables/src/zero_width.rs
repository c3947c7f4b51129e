//! Zero-advance code points (combining marks, format controls) per Unicode release.
//!
//! Generated from Unicode Character Database releases by the offline
//! table build. Do not edit by hand; regenerate instead.

/// Unicode 4.1.0 (131 ranges).
pub static ZERO_WIDTH_4_1_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00610, 0x00615),
    (0x0064B, 0x0065E), (0x00670, 0x00670), (0x006D6, 0x006E4),
    (0x006E7, 0x006E8), (0x006EA, 0x006ED), (0x00711, 0x00711),
    (0x00730, 0x0074A), (0x007A6, 0x007B0), (0x00901, 0x00902),
    (0x0093C, 0x0093C), (0x00941, 0x00948), (0x0094D, 0x0094D),
    (0x00951, 0x00954), (0x00962, 0x00963), (0x00981, 0x00981),
    (0x009BC, 0x009BC), (0x009C1, 0x009C4), (0x009CD, 0x009CD),
    (0x009E2, 0x009E3), (0x00A01, 0x00A02), (0x00A3C, 0x00A3C),
    (0x00A41, 0x00A42), (0x00A47, 0x00A48), (0x00A4B, 0x00A4D),
    (0x00A70, 0x00A71), (0x00A81, 0x00A82), (0x00ABC, 0x00ABC),
    (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD),
    (0x00AE2, 0x00AE3), (0x00B01, 0x00B01), (0x00B3C, 0x00B3C),
    (0x00B3F, 0x00B3F), (0x00B41, 0x00B43), (0x00B4D, 0x00B4D),
    (0x00B56, 0x00B56), (0x00B82, 0x00B82), (0x00BC0, 0x00BC0),
    (0x00BCD, 0x00BCD), (0x00C3E, 0x00C40), (0x00C46, 0x00C48),
    (0x00C4A, 0x00C4D), (0x00C55, 0x00C56), (0x00CBC, 0x00CBC),
    (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD),
    (0x00D41, 0x00D43), (0x00D4D, 0x00D4D), (0x00DCA, 0x00DCA),
    (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6), (0x00E31, 0x00E31),
    (0x00E34, 0x00E3A), (0x00E47, 0x00E4E), (0x00EB1, 0x00EB1),
    (0x00EB4, 0x00EB9), (0x00EBB, 0x00EBC), (0x00EC8, 0x00ECD),
    (0x00F18, 0x00F19), (0x00F35, 0x00F35), (0x00F37, 0x00F37),
    (0x00F39, 0x00F39), (0x00F71, 0x00F7E), (0x00F80, 0x00F84),
    (0x00F86, 0x00F87), (0x00F90, 0x00F97), (0x00F99, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x0102D, 0x01030), (0x01032, 0x01032),
    (0x01036, 0x01037), (0x01039, 0x01039), (0x01058, 0x01059),
    (0x01160, 0x011FF), (0x0135F, 0x0135F), (0x01712, 0x01714),
    (0x01732, 0x01734), (0x01752, 0x01753), (0x01772, 0x01773),
    (0x017B4, 0x017B5), (0x017B7, 0x017BD), (0x017C6, 0x017C6),
    (0x017C9, 0x017D3), (0x017DD, 0x017DD), (0x0180B, 0x0180D),
    (0x018A9, 0x018A9), (0x01920, 0x01922), (0x01927, 0x01928),
    (0x01932, 0x01932), (0x01939, 0x0193B), (0x01A17, 0x01A18),
    (0x01DC0, 0x01DC3), (0x0200B, 0x0200F), (0x0202A, 0x0202E),
    (0x02060, 0x02063), (0x0206A, 0x0206F), (0x020D0, 0x020EB),
    (0x0302A, 0x0302F), (0x03099, 0x0309A), (0x0A806, 0x0A806),
    (0x0A80B, 0x0A80B), (0x0A825, 0x0A826), (0x0FB1E, 0x0FB1E),
    (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF),
    (0x0FFF9, 0x0FFFB), (0x10A01, 0x10A03), (0x10A05, 0x10A06),
    (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F),
    (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0xE0001, 0xE0001),
    (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 5.0.0 (139 ranges).
pub static ZERO_WIDTH_5_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00610, 0x00615),
    (0x0064B, 0x0065E), (0x00670, 0x00670), (0x006D6, 0x006E4),
    (0x006E7, 0x006E8), (0x006EA, 0x006ED), (0x00711, 0x00711),
    (0x00730, 0x0074A), (0x007A6, 0x007B0), (0x007EB, 0x007F3),
    (0x00901, 0x00902), (0x0093C, 0x0093C), (0x00941, 0x00948),
    (0x0094D, 0x0094D), (0x00951, 0x00954), (0x00962, 0x00963),
    (0x00981, 0x00981), (0x009BC, 0x009BC), (0x009C1, 0x009C4),
    (0x009CD, 0x009CD), (0x009E2, 0x009E3), (0x00A01, 0x00A02),
    (0x00A3C, 0x00A3C), (0x00A41, 0x00A42), (0x00A47, 0x00A48),
    (0x00A4B, 0x00A4D), (0x00A70, 0x00A71), (0x00A81, 0x00A82),
    (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8),
    (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3), (0x00B01, 0x00B01),
    (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F), (0x00B41, 0x00B43),
    (0x00B4D, 0x00B4D), (0x00B56, 0x00B56), (0x00B82, 0x00B82),
    (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD), (0x00C3E, 0x00C40),
    (0x00C46, 0x00C48), (0x00C4A, 0x00C4D), (0x00C55, 0x00C56),
    (0x00CBC, 0x00CBC), (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6),
    (0x00CCC, 0x00CCD), (0x00D41, 0x00D43), (0x00D4D, 0x00D4D),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EB9), (0x00EBB, 0x00EBC),
    (0x00EC8, 0x00ECD), (0x00F18, 0x00F19), (0x00F35, 0x00F35),
    (0x00F37, 0x00F37), (0x00F39, 0x00F39), (0x00F71, 0x00F7E),
    (0x00F80, 0x00F84), (0x00F86, 0x00F87), (0x00F90, 0x00F97),
    (0x00F99, 0x00FBC), (0x00FC6, 0x00FC6), (0x0102D, 0x01030),
    (0x01032, 0x01032), (0x01036, 0x01037), (0x01039, 0x01039),
    (0x01058, 0x01059), (0x01160, 0x011FF), (0x0135F, 0x0135F),
    (0x01712, 0x01714), (0x01732, 0x01734), (0x01752, 0x01753),
    (0x01772, 0x01773), (0x017B4, 0x017B5), (0x017B7, 0x017BD),
    (0x017C6, 0x017C6), (0x017C9, 0x017D3), (0x017DD, 0x017DD),
    (0x0180B, 0x0180D), (0x018A9, 0x018A9), (0x01920, 0x01922),
    (0x01927, 0x01928), (0x01932, 0x01932), (0x01939, 0x0193B),
    (0x01A17, 0x01A18), (0x01B00, 0x01B03), (0x01B34, 0x01B34),
    (0x01B36, 0x01B3A), (0x01B3C, 0x01B3C), (0x01B42, 0x01B42),
    (0x01B6B, 0x01B73), (0x01DC0, 0x01DCA), (0x01DFE, 0x01DFF),
    (0x0200B, 0x0200F), (0x0202A, 0x0202E), (0x02060, 0x02063),
    (0x0206A, 0x0206F), (0x020D0, 0x020EB), (0x0302A, 0x0302F),
    (0x03099, 0x0309A), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B),
    (0x0A825, 0x0A826), (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F),
    (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB),
    (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F),
    (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F), (0x1D167, 0x1D169),
    (0x1D173, 0x1D182), (0x1D185, 0x1D18B), (0x1D1AA, 0x1D1AD),
    (0x1D242, 0x1D244), (0xE0001, 0xE0001), (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];

/// Unicode 5.1.0 (151 ranges).
pub static ZERO_WIDTH_5_1_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00610, 0x00615),
    (0x0064B, 0x0065E), (0x00670, 0x00670), (0x006D6, 0x006E4),
    (0x006E7, 0x006E8), (0x006EA, 0x006ED), (0x00711, 0x00711),
    (0x00730, 0x0074A), (0x007A6, 0x007B0), (0x007EB, 0x007F3),
    (0x00901, 0x00902), (0x0093C, 0x0093C), (0x00941, 0x00948),
    (0x0094D, 0x0094D), (0x00951, 0x00954), (0x00962, 0x00963),
    (0x00981, 0x00981), (0x009BC, 0x009BC), (0x009C1, 0x009C4),
    (0x009CD, 0x009CD), (0x009E2, 0x009E3), (0x00A01, 0x00A02),
    (0x00A3C, 0x00A3C), (0x00A41, 0x00A42), (0x00A47, 0x00A48),
    (0x00A4B, 0x00A4D), (0x00A51, 0x00A51), (0x00A70, 0x00A71),
    (0x00A75, 0x00A75), (0x00A81, 0x00A82), (0x00ABC, 0x00ABC),
    (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD),
    (0x00AE2, 0x00AE3), (0x00B01, 0x00B01), (0x00B3C, 0x00B3C),
    (0x00B3F, 0x00B3F), (0x00B41, 0x00B44), (0x00B4D, 0x00B4D),
    (0x00B56, 0x00B56), (0x00B62, 0x00B63), (0x00B82, 0x00B82),
    (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD), (0x00C3E, 0x00C40),
    (0x00C46, 0x00C48), (0x00C4A, 0x00C4D), (0x00C55, 0x00C56),
    (0x00C62, 0x00C63), (0x00CBC, 0x00CBC), (0x00CBF, 0x00CBF),
    (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD), (0x00D41, 0x00D43),
    (0x00D4D, 0x00D4D), (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4),
    (0x00DD6, 0x00DD6), (0x00E31, 0x00E31), (0x00E34, 0x00E3A),
    (0x00E47, 0x00E4E), (0x00EB1, 0x00EB1), (0x00EB4, 0x00EB9),
    (0x00EBB, 0x00EBC), (0x00EC8, 0x00ECD), (0x00F18, 0x00F19),
    (0x00F35, 0x00F35), (0x00F37, 0x00F37), (0x00F39, 0x00F39),
    (0x00F71, 0x00F7E), (0x00F80, 0x00F84), (0x00F86, 0x00F87),
    (0x00F90, 0x00F97), (0x00F99, 0x00FBC), (0x00FC6, 0x00FC6),
    (0x0102D, 0x01030), (0x01032, 0x01032), (0x01036, 0x01037),
    (0x01039, 0x01039), (0x01058, 0x01059), (0x01160, 0x011FF),
    (0x0135F, 0x0135F), (0x01712, 0x01714), (0x01732, 0x01734),
    (0x01752, 0x01753), (0x01772, 0x01773), (0x017B4, 0x017B5),
    (0x017B7, 0x017BD), (0x017C6, 0x017C6), (0x017C9, 0x017D3),
    (0x017DD, 0x017DD), (0x0180B, 0x0180D), (0x018A9, 0x018A9),
    (0x01920, 0x01922), (0x01927, 0x01928), (0x01932, 0x01932),
    (0x01939, 0x0193B), (0x01A17, 0x01A18), (0x01B00, 0x01B03),
    (0x01B34, 0x01B34), (0x01B36, 0x01B3A), (0x01B3C, 0x01B3C),
    (0x01B42, 0x01B42), (0x01B6B, 0x01B73), (0x01B80, 0x01B81),
    (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9), (0x01C2C, 0x01C33),
    (0x01C36, 0x01C37), (0x01DC0, 0x01DCA), (0x01DFE, 0x01DFF),
    (0x0200B, 0x0200F), (0x0202A, 0x0202E), (0x02060, 0x02063),
    (0x0206A, 0x0206F), (0x020D0, 0x020EB), (0x0302A, 0x0302F),
    (0x03099, 0x0309A), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B),
    (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4), (0x0A926, 0x0A92D),
    (0x0A947, 0x0A951), (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F),
    (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB),
    (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F),
    (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F), (0x1D167, 0x1D169),
    (0x1D173, 0x1D182), (0x1D185, 0x1D18B), (0x1D1AA, 0x1D1AD),
    (0x1D242, 0x1D244), (0xE0001, 0xE0001), (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];

/// Unicode 5.2.0 (176 ranges).
pub static ZERO_WIDTH_5_2_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00610, 0x00615),
    (0x0064B, 0x0065E), (0x00670, 0x00670), (0x006D6, 0x006E4),
    (0x006E7, 0x006E8), (0x006EA, 0x006ED), (0x00711, 0x00711),
    (0x00730, 0x0074A), (0x007A6, 0x007B0), (0x007EB, 0x007F3),
    (0x00900, 0x00902), (0x0093C, 0x0093C), (0x00941, 0x00948),
    (0x0094D, 0x0094D), (0x00951, 0x00955), (0x00962, 0x00963),
    (0x00981, 0x00981), (0x009BC, 0x009BC), (0x009C1, 0x009C4),
    (0x009CD, 0x009CD), (0x009E2, 0x009E3), (0x00A01, 0x00A02),
    (0x00A3C, 0x00A3C), (0x00A41, 0x00A42), (0x00A47, 0x00A48),
    (0x00A4B, 0x00A4D), (0x00A51, 0x00A51), (0x00A70, 0x00A71),
    (0x00A75, 0x00A75), (0x00A81, 0x00A82), (0x00ABC, 0x00ABC),
    (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD),
    (0x00AE2, 0x00AE3), (0x00B01, 0x00B01), (0x00B3C, 0x00B3C),
    (0x00B3F, 0x00B3F), (0x00B41, 0x00B44), (0x00B4D, 0x00B4D),
    (0x00B56, 0x00B56), (0x00B62, 0x00B63), (0x00B82, 0x00B82),
    (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD), (0x00C3E, 0x00C40),
    (0x00C46, 0x00C48), (0x00C4A, 0x00C4D), (0x00C55, 0x00C56),
    (0x00C62, 0x00C63), (0x00CBC, 0x00CBC), (0x00CBF, 0x00CBF),
    (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD), (0x00D41, 0x00D43),
    (0x00D4D, 0x00D4D), (0x00D62, 0x00D63), (0x00DCA, 0x00DCA),
    (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6), (0x00E31, 0x00E31),
    (0x00E34, 0x00E3A), (0x00E47, 0x00E4E), (0x00EB1, 0x00EB1),
    (0x00EB4, 0x00EB9), (0x00EBB, 0x00EBC), (0x00EC8, 0x00ECD),
    (0x00F18, 0x00F19), (0x00F35, 0x00F35), (0x00F37, 0x00F37),
    (0x00F39, 0x00F39), (0x00F71, 0x00F7E), (0x00F80, 0x00F84),
    (0x00F86, 0x00F87), (0x00F90, 0x00F97), (0x00F99, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x0102D, 0x01030), (0x01032, 0x01032),
    (0x01036, 0x01037), (0x01039, 0x01039), (0x01058, 0x01059),
    (0x01160, 0x011FF), (0x0135F, 0x0135F), (0x01712, 0x01714),
    (0x01732, 0x01734), (0x01752, 0x01753), (0x01772, 0x01773),
    (0x017B4, 0x017B5), (0x017B7, 0x017BD), (0x017C6, 0x017C6),
    (0x017C9, 0x017D3), (0x017DD, 0x017DD), (0x0180B, 0x0180D),
    (0x018A9, 0x018A9), (0x01920, 0x01922), (0x01927, 0x01928),
    (0x01932, 0x01932), (0x01939, 0x0193B), (0x01A17, 0x01A18),
    (0x01A56, 0x01A56), (0x01A58, 0x01A5E), (0x01A60, 0x01A60),
    (0x01A62, 0x01A62), (0x01A65, 0x01A6C), (0x01A73, 0x01A7C),
    (0x01A7F, 0x01A7F), (0x01B00, 0x01B03), (0x01B34, 0x01B34),
    (0x01B36, 0x01B3A), (0x01B3C, 0x01B3C), (0x01B42, 0x01B42),
    (0x01B6B, 0x01B73), (0x01B80, 0x01B81), (0x01BA2, 0x01BA5),
    (0x01BA8, 0x01BA9), (0x01C2C, 0x01C33), (0x01C36, 0x01C37),
    (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0), (0x01CE2, 0x01CE8),
    (0x01CED, 0x01CED), (0x01DC0, 0x01DCA), (0x01DFE, 0x01DFF),
    (0x0200B, 0x0200F), (0x0202A, 0x0202E), (0x02060, 0x02063),
    (0x0206A, 0x0206F), (0x020D0, 0x020EB), (0x0302A, 0x0302F),
    (0x03099, 0x0309A), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B),
    (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4), (0x0A8E0, 0x0A8F1),
    (0x0A926, 0x0A92D), (0x0A947, 0x0A951), (0x0A980, 0x0A982),
    (0x0A9B3, 0x0A9B3), (0x0A9B6, 0x0A9B9), (0x0A9BC, 0x0A9BC),
    (0x0AAB0, 0x0AAB0), (0x0AAB2, 0x0AAB4), (0x0AAB7, 0x0AAB8),
    (0x0AABE, 0x0AABF), (0x0AAC1, 0x0AAC1), (0x0FB1E, 0x0FB1E),
    (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF),
    (0x0FFF9, 0x0FFFB), (0x10A01, 0x10A03), (0x10A05, 0x10A06),
    (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F),
    (0x11080, 0x11081), (0x110B3, 0x110B6), (0x110B9, 0x110BA),
    (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0xE0001, 0xE0001),
    (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 6.0.0 (180 ranges).
pub static ZERO_WIDTH_6_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00610, 0x0061A),
    (0x0064B, 0x0065F), (0x00670, 0x00670), (0x006D6, 0x006E4),
    (0x006E7, 0x006E8), (0x006EA, 0x006ED), (0x00711, 0x00711),
    (0x00730, 0x0074A), (0x007A6, 0x007B0), (0x007EB, 0x007F3),
    (0x00859, 0x0085B), (0x00900, 0x00902), (0x0093A, 0x0093A),
    (0x0093C, 0x0093C), (0x00941, 0x00948), (0x0094D, 0x0094D),
    (0x00951, 0x00955), (0x00962, 0x00963), (0x00981, 0x00981),
    (0x009BC, 0x009BC), (0x009C1, 0x009C4), (0x009CD, 0x009CD),
    (0x009E2, 0x009E3), (0x00A01, 0x00A02), (0x00A3C, 0x00A3C),
    (0x00A41, 0x00A42), (0x00A47, 0x00A48), (0x00A4B, 0x00A4D),
    (0x00A51, 0x00A51), (0x00A70, 0x00A71), (0x00A75, 0x00A75),
    (0x00A81, 0x00A82), (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5),
    (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3),
    (0x00B01, 0x00B01), (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F),
    (0x00B41, 0x00B44), (0x00B4D, 0x00B4D), (0x00B56, 0x00B56),
    (0x00B62, 0x00B63), (0x00B82, 0x00B82), (0x00BC0, 0x00BC0),
    (0x00BCD, 0x00BCD), (0x00C3E, 0x00C40), (0x00C46, 0x00C48),
    (0x00C4A, 0x00C4D), (0x00C55, 0x00C56), (0x00C62, 0x00C63),
    (0x00CBC, 0x00CBC), (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6),
    (0x00CCC, 0x00CCD), (0x00D41, 0x00D43), (0x00D4D, 0x00D4D),
    (0x00D62, 0x00D63), (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4),
    (0x00DD6, 0x00DD6), (0x00E31, 0x00E31), (0x00E34, 0x00E3A),
    (0x00E47, 0x00E4E), (0x00EB1, 0x00EB1), (0x00EB4, 0x00EB9),
    (0x00EBB, 0x00EBC), (0x00EC8, 0x00ECD), (0x00F18, 0x00F19),
    (0x00F35, 0x00F35), (0x00F37, 0x00F37), (0x00F39, 0x00F39),
    (0x00F71, 0x00F7E), (0x00F80, 0x00F84), (0x00F86, 0x00F87),
    (0x00F8D, 0x00F97), (0x00F99, 0x00FBC), (0x00FC6, 0x00FC6),
    (0x0102D, 0x01030), (0x01032, 0x01032), (0x01036, 0x01037),
    (0x01039, 0x01039), (0x01058, 0x01059), (0x01160, 0x011FF),
    (0x0135D, 0x0135F), (0x01712, 0x01714), (0x01732, 0x01734),
    (0x01752, 0x01753), (0x01772, 0x01773), (0x017B4, 0x017B5),
    (0x017B7, 0x017BD), (0x017C6, 0x017C6), (0x017C9, 0x017D3),
    (0x017DD, 0x017DD), (0x0180B, 0x0180D), (0x018A9, 0x018A9),
    (0x01920, 0x01922), (0x01927, 0x01928), (0x01932, 0x01932),
    (0x01939, 0x0193B), (0x01A17, 0x01A18), (0x01A56, 0x01A56),
    (0x01A58, 0x01A5E), (0x01A60, 0x01A60), (0x01A62, 0x01A62),
    (0x01A65, 0x01A6C), (0x01A73, 0x01A7C), (0x01A7F, 0x01A7F),
    (0x01B00, 0x01B03), (0x01B34, 0x01B34), (0x01B36, 0x01B3A),
    (0x01B3C, 0x01B3C), (0x01B42, 0x01B42), (0x01B6B, 0x01B73),
    (0x01B80, 0x01B81), (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9),
    (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9), (0x01BED, 0x01BED),
    (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33), (0x01C36, 0x01C37),
    (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0), (0x01CE2, 0x01CE8),
    (0x01CED, 0x01CED), (0x01DC0, 0x01DCA), (0x01DFE, 0x01DFF),
    (0x0200B, 0x0200F), (0x0202A, 0x0202E), (0x02060, 0x02063),
    (0x0206A, 0x0206F), (0x020D0, 0x020EB), (0x0302A, 0x0302F),
    (0x03099, 0x0309A), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B),
    (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4), (0x0A8E0, 0x0A8F1),
    (0x0A926, 0x0A92D), (0x0A947, 0x0A951), (0x0A980, 0x0A982),
    (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC), (0x0AAB0, 0x0AAB0),
    (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF), (0x0AAC1, 0x0AAC1),
    (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE23),
    (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB), (0x10A01, 0x10A03),
    (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F), (0x11080, 0x11081), (0x110B3, 0x110B6),
    (0x110B9, 0x110BA), (0x1D167, 0x1D169), (0x1D173, 0x1D182),
    (0x1D185, 0x1D18B), (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244),
    (0xE0001, 0xE0001), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 6.1.0 (194 ranges).
pub static ZERO_WIDTH_6_1_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x00859, 0x0085B), (0x008E4, 0x008FE),
    (0x00900, 0x00902), (0x0093A, 0x0093A), (0x0093C, 0x0093C),
    (0x00941, 0x00948), (0x0094D, 0x0094D), (0x00951, 0x00955),
    (0x00962, 0x00963), (0x00981, 0x00981), (0x009BC, 0x009BC),
    (0x009C1, 0x009C4), (0x009CD, 0x009CD), (0x009E2, 0x009E3),
    (0x00A01, 0x00A02), (0x00A3C, 0x00A3C), (0x00A41, 0x00A42),
    (0x00A47, 0x00A48), (0x00A4B, 0x00A4D), (0x00A51, 0x00A51),
    (0x00A70, 0x00A71), (0x00A75, 0x00A75), (0x00A81, 0x00A82),
    (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8),
    (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3), (0x00B01, 0x00B01),
    (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F), (0x00B41, 0x00B44),
    (0x00B4D, 0x00B4D), (0x00B56, 0x00B56), (0x00B62, 0x00B63),
    (0x00B82, 0x00B82), (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD),
    (0x00C3E, 0x00C40), (0x00C46, 0x00C48), (0x00C4A, 0x00C4D),
    (0x00C55, 0x00C56), (0x00C62, 0x00C63), (0x00CBC, 0x00CBC),
    (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD),
    (0x00D41, 0x00D43), (0x00D4D, 0x00D4D), (0x00D62, 0x00D63),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EB9), (0x00EBB, 0x00EBC),
    (0x00EC8, 0x00ECD), (0x00F18, 0x00F19), (0x00F35, 0x00F35),
    (0x00F37, 0x00F37), (0x00F39, 0x00F39), (0x00F71, 0x00F7E),
    (0x00F80, 0x00F84), (0x00F86, 0x00F87), (0x00F8D, 0x00F97),
    (0x00F99, 0x00FBC), (0x00FC6, 0x00FC6), (0x0102D, 0x01030),
    (0x01032, 0x01032), (0x01036, 0x01037), (0x01039, 0x01039),
    (0x01058, 0x01059), (0x01160, 0x011FF), (0x0135D, 0x0135F),
    (0x01712, 0x01714), (0x01732, 0x01734), (0x01752, 0x01753),
    (0x01772, 0x01773), (0x017B4, 0x017B5), (0x017B7, 0x017BD),
    (0x017C6, 0x017C6), (0x017C9, 0x017D3), (0x017DD, 0x017DD),
    (0x0180B, 0x0180D), (0x018A9, 0x018A9), (0x01920, 0x01922),
    (0x01927, 0x01928), (0x01932, 0x01932), (0x01939, 0x0193B),
    (0x01A17, 0x01A18), (0x01A56, 0x01A56), (0x01A58, 0x01A5E),
    (0x01A60, 0x01A60), (0x01A62, 0x01A62), (0x01A65, 0x01A6C),
    (0x01A73, 0x01A7C), (0x01A7F, 0x01A7F), (0x01B00, 0x01B03),
    (0x01B34, 0x01B34), (0x01B36, 0x01B3A), (0x01B3C, 0x01B3C),
    (0x01B42, 0x01B42), (0x01B6B, 0x01B73), (0x01B80, 0x01B81),
    (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9), (0x01BAB, 0x01BAB),
    (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9), (0x01BED, 0x01BED),
    (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33), (0x01C36, 0x01C37),
    (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0), (0x01CE2, 0x01CE8),
    (0x01CED, 0x01CED), (0x01CF4, 0x01CF4), (0x01DC0, 0x01DCA),
    (0x01DFE, 0x01DFF), (0x0200B, 0x0200F), (0x0202A, 0x0202E),
    (0x02060, 0x02063), (0x0206A, 0x0206F), (0x020D0, 0x020EB),
    (0x0302A, 0x0302F), (0x03099, 0x0309A), (0x0A806, 0x0A806),
    (0x0A80B, 0x0A80B), (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4),
    (0x0A8E0, 0x0A8F1), (0x0A926, 0x0A92D), (0x0A947, 0x0A951),
    (0x0A980, 0x0A982), (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC),
    (0x0AAB0, 0x0AAB0), (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF),
    (0x0AAC1, 0x0AAC1), (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F),
    (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB),
    (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F),
    (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F), (0x11080, 0x11081),
    (0x110B3, 0x110B6), (0x110B9, 0x110BA), (0x11100, 0x11102),
    (0x11127, 0x1112B), (0x1112D, 0x11134), (0x11180, 0x11181),
    (0x111B6, 0x111BE), (0x116AB, 0x116AB), (0x116AD, 0x116AD),
    (0x116B0, 0x116B5), (0x116B7, 0x116B7), (0x16F8F, 0x16F92),
    (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0xE0001, 0xE0001),
    (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 7.0.0 (216 ranges).
pub static ZERO_WIDTH_7_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x00859, 0x0085B), (0x008E4, 0x008FE),
    (0x00900, 0x00902), (0x0093A, 0x0093A), (0x0093C, 0x0093C),
    (0x00941, 0x00948), (0x0094D, 0x0094D), (0x00951, 0x00955),
    (0x00962, 0x00963), (0x00981, 0x00981), (0x009BC, 0x009BC),
    (0x009C1, 0x009C4), (0x009CD, 0x009CD), (0x009E2, 0x009E3),
    (0x00A01, 0x00A02), (0x00A3C, 0x00A3C), (0x00A41, 0x00A42),
    (0x00A47, 0x00A48), (0x00A4B, 0x00A4D), (0x00A51, 0x00A51),
    (0x00A70, 0x00A71), (0x00A75, 0x00A75), (0x00A81, 0x00A82),
    (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8),
    (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3), (0x00B01, 0x00B01),
    (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F), (0x00B41, 0x00B44),
    (0x00B4D, 0x00B4D), (0x00B56, 0x00B56), (0x00B62, 0x00B63),
    (0x00B82, 0x00B82), (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD),
    (0x00C3E, 0x00C40), (0x00C46, 0x00C48), (0x00C4A, 0x00C4D),
    (0x00C55, 0x00C56), (0x00C62, 0x00C63), (0x00CBC, 0x00CBC),
    (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD),
    (0x00D41, 0x00D43), (0x00D4D, 0x00D4D), (0x00D62, 0x00D63),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EB9), (0x00EBB, 0x00EBC),
    (0x00EC8, 0x00ECD), (0x00F18, 0x00F19), (0x00F35, 0x00F35),
    (0x00F37, 0x00F37), (0x00F39, 0x00F39), (0x00F71, 0x00F7E),
    (0x00F80, 0x00F84), (0x00F86, 0x00F87), (0x00F8D, 0x00F97),
    (0x00F99, 0x00FBC), (0x00FC6, 0x00FC6), (0x0102D, 0x01030),
    (0x01032, 0x01032), (0x01036, 0x01037), (0x01039, 0x01039),
    (0x01058, 0x01059), (0x01160, 0x011FF), (0x0135D, 0x0135F),
    (0x01712, 0x01714), (0x01732, 0x01734), (0x01752, 0x01753),
    (0x01772, 0x01773), (0x017B4, 0x017B5), (0x017B7, 0x017BD),
    (0x017C6, 0x017C6), (0x017C9, 0x017D3), (0x017DD, 0x017DD),
    (0x0180B, 0x0180D), (0x018A9, 0x018A9), (0x01920, 0x01922),
    (0x01927, 0x01928), (0x01932, 0x01932), (0x01939, 0x0193B),
    (0x01A17, 0x01A18), (0x01A56, 0x01A56), (0x01A58, 0x01A5E),
    (0x01A60, 0x01A60), (0x01A62, 0x01A62), (0x01A65, 0x01A6C),
    (0x01A73, 0x01A7C), (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD),
    (0x01B00, 0x01B03), (0x01B34, 0x01B34), (0x01B36, 0x01B3A),
    (0x01B3C, 0x01B3C), (0x01B42, 0x01B42), (0x01B6B, 0x01B73),
    (0x01B80, 0x01B81), (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9),
    (0x01BAB, 0x01BAB), (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9),
    (0x01BED, 0x01BED), (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33),
    (0x01C36, 0x01C37), (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0),
    (0x01CE2, 0x01CE8), (0x01CED, 0x01CED), (0x01CF4, 0x01CF4),
    (0x01CF8, 0x01CF9), (0x01DC0, 0x01DCA), (0x01DFE, 0x01DFF),
    (0x0200B, 0x0200F), (0x0202A, 0x0202E), (0x02060, 0x02063),
    (0x0206A, 0x0206F), (0x020D0, 0x020EB), (0x0302A, 0x0302F),
    (0x03099, 0x0309A), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B),
    (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4), (0x0A8E0, 0x0A8F1),
    (0x0A926, 0x0A92D), (0x0A947, 0x0A951), (0x0A980, 0x0A982),
    (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC), (0x0AAB0, 0x0AAB0),
    (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF), (0x0AAC1, 0x0AAC1),
    (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE23),
    (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB), (0x10A01, 0x10A03),
    (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F), (0x11080, 0x11081), (0x110B3, 0x110B6),
    (0x110B9, 0x110BA), (0x11100, 0x11102), (0x11127, 0x1112B),
    (0x1112D, 0x11134), (0x11180, 0x11181), (0x111B6, 0x111BE),
    (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11301, 0x11301),
    (0x1133C, 0x1133C), (0x11340, 0x11340), (0x11366, 0x1136C),
    (0x11370, 0x11374), (0x114B3, 0x114B8), (0x114BA, 0x114BA),
    (0x114BF, 0x114C0), (0x114C2, 0x114C3), (0x115B2, 0x115B5),
    (0x115BC, 0x115BD), (0x115BF, 0x115C0), (0x11633, 0x1163A),
    (0x1163D, 0x1163D), (0x1163F, 0x11640), (0x116AB, 0x116AB),
    (0x116AD, 0x116AD), (0x116B0, 0x116B7), (0x16AF0, 0x16AF4),
    (0x16B30, 0x16B36), (0x16F8F, 0x16F92), (0x1BC9D, 0x1BC9E),
    (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1E8D0, 0x1E8D6),
    (0xE0001, 0xE0001), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 8.0.0 (225 ranges).
pub static ZERO_WIDTH_8_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x00859, 0x0085B), (0x008E3, 0x008FE),
    (0x00900, 0x00902), (0x0093A, 0x0093A), (0x0093C, 0x0093C),
    (0x00941, 0x00948), (0x0094D, 0x0094D), (0x00951, 0x00955),
    (0x00962, 0x00963), (0x00981, 0x00981), (0x009BC, 0x009BC),
    (0x009C1, 0x009C4), (0x009CD, 0x009CD), (0x009E2, 0x009E3),
    (0x00A01, 0x00A02), (0x00A3C, 0x00A3C), (0x00A41, 0x00A42),
    (0x00A47, 0x00A48), (0x00A4B, 0x00A4D), (0x00A51, 0x00A51),
    (0x00A70, 0x00A71), (0x00A75, 0x00A75), (0x00A81, 0x00A82),
    (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8),
    (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3), (0x00B01, 0x00B01),
    (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F), (0x00B41, 0x00B44),
    (0x00B4D, 0x00B4D), (0x00B56, 0x00B56), (0x00B62, 0x00B63),
    (0x00B82, 0x00B82), (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD),
    (0x00C3E, 0x00C40), (0x00C46, 0x00C48), (0x00C4A, 0x00C4D),
    (0x00C55, 0x00C56), (0x00C62, 0x00C63), (0x00CBC, 0x00CBC),
    (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD),
    (0x00D41, 0x00D43), (0x00D4D, 0x00D4D), (0x00D62, 0x00D63),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EB9), (0x00EBB, 0x00EBC),
    (0x00EC8, 0x00ECD), (0x00F18, 0x00F19), (0x00F35, 0x00F35),
    (0x00F37, 0x00F37), (0x00F39, 0x00F39), (0x00F71, 0x00F7E),
    (0x00F80, 0x00F84), (0x00F86, 0x00F87), (0x00F8D, 0x00F97),
    (0x00F99, 0x00FBC), (0x00FC6, 0x00FC6), (0x0102D, 0x01030),
    (0x01032, 0x01032), (0x01036, 0x01037), (0x01039, 0x01039),
    (0x01058, 0x01059), (0x01160, 0x011FF), (0x0135D, 0x0135F),
    (0x01712, 0x01714), (0x01732, 0x01734), (0x01752, 0x01753),
    (0x01772, 0x01773), (0x017B4, 0x017B5), (0x017B7, 0x017BD),
    (0x017C6, 0x017C6), (0x017C9, 0x017D3), (0x017DD, 0x017DD),
    (0x0180B, 0x0180D), (0x018A9, 0x018A9), (0x01920, 0x01922),
    (0x01927, 0x01928), (0x01932, 0x01932), (0x01939, 0x0193B),
    (0x01A17, 0x01A18), (0x01A56, 0x01A56), (0x01A58, 0x01A5E),
    (0x01A60, 0x01A60), (0x01A62, 0x01A62), (0x01A65, 0x01A6C),
    (0x01A73, 0x01A7C), (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD),
    (0x01B00, 0x01B03), (0x01B34, 0x01B34), (0x01B36, 0x01B3A),
    (0x01B3C, 0x01B3C), (0x01B42, 0x01B42), (0x01B6B, 0x01B73),
    (0x01B80, 0x01B81), (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9),
    (0x01BAB, 0x01BAB), (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9),
    (0x01BED, 0x01BED), (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33),
    (0x01C36, 0x01C37), (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0),
    (0x01CE2, 0x01CE8), (0x01CED, 0x01CED), (0x01CF4, 0x01CF4),
    (0x01CF8, 0x01CF9), (0x01DC0, 0x01DCA), (0x01DFE, 0x01DFF),
    (0x0200B, 0x0200F), (0x0202A, 0x0202E), (0x02060, 0x02063),
    (0x0206A, 0x0206F), (0x020D0, 0x020EB), (0x0302A, 0x0302F),
    (0x03099, 0x0309A), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B),
    (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4), (0x0A8E0, 0x0A8F1),
    (0x0A926, 0x0A92D), (0x0A947, 0x0A951), (0x0A980, 0x0A982),
    (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC), (0x0AAB0, 0x0AAB0),
    (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF), (0x0AAC1, 0x0AAC1),
    (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE23),
    (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB), (0x10A01, 0x10A03),
    (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F), (0x11080, 0x11081), (0x110B3, 0x110B6),
    (0x110B9, 0x110BA), (0x11100, 0x11102), (0x11127, 0x1112B),
    (0x1112D, 0x11134), (0x11180, 0x11181), (0x111B6, 0x111BE),
    (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11301, 0x11301),
    (0x1133C, 0x1133C), (0x11340, 0x11340), (0x11366, 0x1136C),
    (0x11370, 0x11374), (0x114B3, 0x114B8), (0x114BA, 0x114BA),
    (0x114BF, 0x114C0), (0x114C2, 0x114C3), (0x115B2, 0x115B5),
    (0x115BC, 0x115BD), (0x115BF, 0x115C0), (0x11633, 0x1163A),
    (0x1163D, 0x1163D), (0x1163F, 0x11640), (0x116AB, 0x116AB),
    (0x116AD, 0x116AD), (0x116B0, 0x116B7), (0x1171D, 0x1171F),
    (0x11722, 0x11725), (0x11727, 0x1172B), (0x16AF0, 0x16AF4),
    (0x16B30, 0x16B36), (0x16F8F, 0x16F92), (0x1BC9D, 0x1BC9E),
    (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1D800, 0x1DA36),
    (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84),
    (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF), (0x1E8D0, 0x1E8D6),
    (0xE0001, 0xE0001), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 9.0.0 (241 ranges).
pub static ZERO_WIDTH_9_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x00859, 0x0085B), (0x008D4, 0x008FE),
    (0x00900, 0x00902), (0x0093A, 0x0093A), (0x0093C, 0x0093C),
    (0x00941, 0x00948), (0x0094D, 0x0094D), (0x00951, 0x00955),
    (0x00962, 0x00963), (0x00981, 0x00981), (0x009BC, 0x009BC),
    (0x009C1, 0x009C4), (0x009CD, 0x009CD), (0x009E2, 0x009E3),
    (0x00A01, 0x00A02), (0x00A3C, 0x00A3C), (0x00A41, 0x00A42),
    (0x00A47, 0x00A48), (0x00A4B, 0x00A4D), (0x00A51, 0x00A51),
    (0x00A70, 0x00A71), (0x00A75, 0x00A75), (0x00A81, 0x00A82),
    (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8),
    (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3), (0x00B01, 0x00B01),
    (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F), (0x00B41, 0x00B44),
    (0x00B4D, 0x00B4D), (0x00B56, 0x00B56), (0x00B62, 0x00B63),
    (0x00B82, 0x00B82), (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD),
    (0x00C3E, 0x00C40), (0x00C46, 0x00C48), (0x00C4A, 0x00C4D),
    (0x00C55, 0x00C56), (0x00C62, 0x00C63), (0x00CBC, 0x00CBC),
    (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD),
    (0x00D41, 0x00D43), (0x00D4D, 0x00D4D), (0x00D62, 0x00D63),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EB9), (0x00EBB, 0x00EBC),
    (0x00EC8, 0x00ECD), (0x00F18, 0x00F19), (0x00F35, 0x00F35),
    (0x00F37, 0x00F37), (0x00F39, 0x00F39), (0x00F71, 0x00F7E),
    (0x00F80, 0x00F84), (0x00F86, 0x00F87), (0x00F8D, 0x00F97),
    (0x00F99, 0x00FBC), (0x00FC6, 0x00FC6), (0x0102D, 0x01030),
    (0x01032, 0x01032), (0x01036, 0x01037), (0x01039, 0x01039),
    (0x01058, 0x01059), (0x01160, 0x011FF), (0x0135D, 0x0135F),
    (0x01712, 0x01714), (0x01732, 0x01734), (0x01752, 0x01753),
    (0x01772, 0x01773), (0x017B4, 0x017B5), (0x017B7, 0x017BD),
    (0x017C6, 0x017C6), (0x017C9, 0x017D3), (0x017DD, 0x017DD),
    (0x0180B, 0x0180D), (0x018A9, 0x018A9), (0x01920, 0x01922),
    (0x01927, 0x01928), (0x01932, 0x01932), (0x01939, 0x0193B),
    (0x01A17, 0x01A18), (0x01A56, 0x01A56), (0x01A58, 0x01A5E),
    (0x01A60, 0x01A60), (0x01A62, 0x01A62), (0x01A65, 0x01A6C),
    (0x01A73, 0x01A7C), (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD),
    (0x01B00, 0x01B03), (0x01B34, 0x01B34), (0x01B36, 0x01B3A),
    (0x01B3C, 0x01B3C), (0x01B42, 0x01B42), (0x01B6B, 0x01B73),
    (0x01B80, 0x01B81), (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9),
    (0x01BAB, 0x01BAB), (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9),
    (0x01BED, 0x01BED), (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33),
    (0x01C36, 0x01C37), (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0),
    (0x01CE2, 0x01CE8), (0x01CED, 0x01CED), (0x01CF4, 0x01CF4),
    (0x01CF8, 0x01CF9), (0x01DC0, 0x01DCA), (0x01DFE, 0x01DFF),
    (0x0200B, 0x0200F), (0x0202A, 0x0202E), (0x02060, 0x02063),
    (0x0206A, 0x0206F), (0x020D0, 0x020EB), (0x0302A, 0x0302F),
    (0x03099, 0x0309A), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B),
    (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4), (0x0A8E0, 0x0A8F1),
    (0x0A926, 0x0A92D), (0x0A947, 0x0A951), (0x0A980, 0x0A982),
    (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC), (0x0AAB0, 0x0AAB0),
    (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF), (0x0AAC1, 0x0AAC1),
    (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE23),
    (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB), (0x10A01, 0x10A03),
    (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F), (0x11080, 0x11081), (0x110B3, 0x110B6),
    (0x110B9, 0x110BA), (0x11100, 0x11102), (0x11127, 0x1112B),
    (0x1112D, 0x11134), (0x11180, 0x11181), (0x111B6, 0x111BE),
    (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11301, 0x11301),
    (0x1133C, 0x1133C), (0x11340, 0x11340), (0x11366, 0x1136C),
    (0x11370, 0x11374), (0x11438, 0x1143F), (0x11442, 0x11444),
    (0x11446, 0x11446), (0x114B3, 0x114B8), (0x114BA, 0x114BA),
    (0x114BF, 0x114C0), (0x114C2, 0x114C3), (0x115B2, 0x115B5),
    (0x115BC, 0x115BD), (0x115BF, 0x115C0), (0x11633, 0x1163A),
    (0x1163D, 0x1163D), (0x1163F, 0x11640), (0x116AB, 0x116AB),
    (0x116AD, 0x116AD), (0x116B0, 0x116B7), (0x1171D, 0x1171F),
    (0x11722, 0x11725), (0x11727, 0x1172B), (0x11C30, 0x11C36),
    (0x11C38, 0x11C3D), (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7),
    (0x11CAA, 0x11CB0), (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6),
    (0x16AF0, 0x16AF4), (0x16B30, 0x16B36), (0x16F8F, 0x16F92),
    (0x1BC9D, 0x1BC9E), (0x1D167, 0x1D169), (0x1D173, 0x1D182),
    (0x1D185, 0x1D18B), (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244),
    (0x1D800, 0x1DA36), (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75),
    (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF),
    (0x1E000, 0x1E006), (0x1E008, 0x1E018), (0x1E01B, 0x1E021),
    (0x1E023, 0x1E024), (0x1E026, 0x1E02A), (0x1E8D0, 0x1E8D6),
    (0x1E944, 0x1E94A), (0xE0001, 0xE0001), (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];

/// Unicode 10.0.0 (258 ranges).
pub static ZERO_WIDTH_10_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x00859, 0x0085B), (0x008D4, 0x008FE),
    (0x00900, 0x00902), (0x0093A, 0x0093A), (0x0093C, 0x0093C),
    (0x00941, 0x00948), (0x0094D, 0x0094D), (0x00951, 0x00955),
    (0x00962, 0x00963), (0x00981, 0x00981), (0x009BC, 0x009BC),
    (0x009C1, 0x009C4), (0x009CD, 0x009CD), (0x009E2, 0x009E3),
    (0x00A01, 0x00A02), (0x00A3C, 0x00A3C), (0x00A41, 0x00A42),
    (0x00A47, 0x00A48), (0x00A4B, 0x00A4D), (0x00A51, 0x00A51),
    (0x00A70, 0x00A71), (0x00A75, 0x00A75), (0x00A81, 0x00A82),
    (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8),
    (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3), (0x00B01, 0x00B01),
    (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F), (0x00B41, 0x00B44),
    (0x00B4D, 0x00B4D), (0x00B56, 0x00B56), (0x00B62, 0x00B63),
    (0x00B82, 0x00B82), (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD),
    (0x00C3E, 0x00C40), (0x00C46, 0x00C48), (0x00C4A, 0x00C4D),
    (0x00C55, 0x00C56), (0x00C62, 0x00C63), (0x00CBC, 0x00CBC),
    (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD),
    (0x00D00, 0x00D00), (0x00D3B, 0x00D3C), (0x00D41, 0x00D43),
    (0x00D4D, 0x00D4D), (0x00D62, 0x00D63), (0x00DCA, 0x00DCA),
    (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6), (0x00E31, 0x00E31),
    (0x00E34, 0x00E3A), (0x00E47, 0x00E4E), (0x00EB1, 0x00EB1),
    (0x00EB4, 0x00EB9), (0x00EBB, 0x00EBC), (0x00EC8, 0x00ECD),
    (0x00F18, 0x00F19), (0x00F35, 0x00F35), (0x00F37, 0x00F37),
    (0x00F39, 0x00F39), (0x00F71, 0x00F7E), (0x00F80, 0x00F84),
    (0x00F86, 0x00F87), (0x00F8D, 0x00F97), (0x00F99, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x0102D, 0x01030), (0x01032, 0x01032),
    (0x01036, 0x01037), (0x01039, 0x01039), (0x01058, 0x01059),
    (0x01160, 0x011FF), (0x0135D, 0x0135F), (0x01712, 0x01714),
    (0x01732, 0x01734), (0x01752, 0x01753), (0x01772, 0x01773),
    (0x017B4, 0x017B5), (0x017B7, 0x017BD), (0x017C6, 0x017C6),
    (0x017C9, 0x017D3), (0x017DD, 0x017DD), (0x0180B, 0x0180D),
    (0x018A9, 0x018A9), (0x01920, 0x01922), (0x01927, 0x01928),
    (0x01932, 0x01932), (0x01939, 0x0193B), (0x01A17, 0x01A18),
    (0x01A56, 0x01A56), (0x01A58, 0x01A5E), (0x01A60, 0x01A60),
    (0x01A62, 0x01A62), (0x01A65, 0x01A6C), (0x01A73, 0x01A7C),
    (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD), (0x01B00, 0x01B03),
    (0x01B34, 0x01B34), (0x01B36, 0x01B3A), (0x01B3C, 0x01B3C),
    (0x01B42, 0x01B42), (0x01B6B, 0x01B73), (0x01B80, 0x01B81),
    (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9), (0x01BAB, 0x01BAB),
    (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9), (0x01BED, 0x01BED),
    (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33), (0x01C36, 0x01C37),
    (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0), (0x01CE2, 0x01CE8),
    (0x01CED, 0x01CED), (0x01CF4, 0x01CF4), (0x01CF8, 0x01CF9),
    (0x01DC0, 0x01DCA), (0x01DF6, 0x01DF9), (0x01DFE, 0x01DFF),
    (0x0200B, 0x0200F), (0x0202A, 0x0202E), (0x02060, 0x02063),
    (0x0206A, 0x0206F), (0x020D0, 0x020EB), (0x0302A, 0x0302F),
    (0x03099, 0x0309A), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B),
    (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4), (0x0A8E0, 0x0A8F1),
    (0x0A926, 0x0A92D), (0x0A947, 0x0A951), (0x0A980, 0x0A982),
    (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC), (0x0AAB0, 0x0AAB0),
    (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF), (0x0AAC1, 0x0AAC1),
    (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE23),
    (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB), (0x10A01, 0x10A03),
    (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F), (0x11080, 0x11081), (0x110B3, 0x110B6),
    (0x110B9, 0x110BA), (0x11100, 0x11102), (0x11127, 0x1112B),
    (0x1112D, 0x11134), (0x11180, 0x11181), (0x111B6, 0x111BE),
    (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11301, 0x11301),
    (0x1133C, 0x1133C), (0x11340, 0x11340), (0x11366, 0x1136C),
    (0x11370, 0x11374), (0x11438, 0x1143F), (0x11442, 0x11444),
    (0x11446, 0x11446), (0x114B3, 0x114B8), (0x114BA, 0x114BA),
    (0x114BF, 0x114C0), (0x114C2, 0x114C3), (0x115B2, 0x115B5),
    (0x115BC, 0x115BD), (0x115BF, 0x115C0), (0x11633, 0x1163A),
    (0x1163D, 0x1163D), (0x1163F, 0x11640), (0x116AB, 0x116AB),
    (0x116AD, 0x116AD), (0x116B0, 0x116B7), (0x1171D, 0x1171F),
    (0x11722, 0x11725), (0x11727, 0x1172B), (0x11A01, 0x11A06),
    (0x11A09, 0x11A0A), (0x11A33, 0x11A38), (0x11A3B, 0x11A3E),
    (0x11A47, 0x11A47), (0x11A51, 0x11A56), (0x11A59, 0x11A5B),
    (0x11A8A, 0x11A96), (0x11A98, 0x11A99), (0x11C30, 0x11C36),
    (0x11C38, 0x11C3D), (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7),
    (0x11CAA, 0x11CB0), (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6),
    (0x11D31, 0x11D36), (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D),
    (0x11D3F, 0x11D45), (0x11D47, 0x11D47), (0x16AF0, 0x16AF4),
    (0x16B30, 0x16B36), (0x16F8F, 0x16F92), (0x1BC9D, 0x1BC9E),
    (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1D800, 0x1DA36),
    (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84),
    (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF), (0x1E000, 0x1E006),
    (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024),
    (0x1E026, 0x1E02A), (0x1E8D0, 0x1E8D6), (0x1E944, 0x1E94A),
    (0xE0001, 0xE0001), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 11.0.0 (268 ranges).
pub static ZERO_WIDTH_11_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x007FD, 0x007FD), (0x00859, 0x0085B),
    (0x008D4, 0x008FE), (0x00900, 0x00902), (0x0093A, 0x0093A),
    (0x0093C, 0x0093C), (0x00941, 0x00948), (0x0094D, 0x0094D),
    (0x00951, 0x00955), (0x00962, 0x00963), (0x00981, 0x00981),
    (0x009BC, 0x009BC), (0x009C1, 0x009C4), (0x009CD, 0x009CD),
    (0x009E2, 0x009E3), (0x00A01, 0x00A02), (0x00A3C, 0x00A3C),
    (0x00A41, 0x00A42), (0x00A47, 0x00A48), (0x00A4B, 0x00A4D),
    (0x00A51, 0x00A51), (0x00A70, 0x00A71), (0x00A75, 0x00A75),
    (0x00A81, 0x00A82), (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5),
    (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3),
    (0x00B01, 0x00B01), (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F),
    (0x00B41, 0x00B44), (0x00B4D, 0x00B4D), (0x00B56, 0x00B56),
    (0x00B62, 0x00B63), (0x00B82, 0x00B82), (0x00BC0, 0x00BC0),
    (0x00BCD, 0x00BCD), (0x00C3E, 0x00C40), (0x00C46, 0x00C48),
    (0x00C4A, 0x00C4D), (0x00C55, 0x00C56), (0x00C62, 0x00C63),
    (0x00CBC, 0x00CBC), (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6),
    (0x00CCC, 0x00CCD), (0x00D00, 0x00D00), (0x00D3B, 0x00D3C),
    (0x00D41, 0x00D43), (0x00D4D, 0x00D4D), (0x00D62, 0x00D63),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EB9), (0x00EBB, 0x00EBC),
    (0x00EC8, 0x00ECD), (0x00F18, 0x00F19), (0x00F35, 0x00F35),
    (0x00F37, 0x00F37), (0x00F39, 0x00F39), (0x00F71, 0x00F7E),
    (0x00F80, 0x00F84), (0x00F86, 0x00F87), (0x00F8D, 0x00F97),
    (0x00F99, 0x00FBC), (0x00FC6, 0x00FC6), (0x0102D, 0x01030),
    (0x01032, 0x01032), (0x01036, 0x01037), (0x01039, 0x01039),
    (0x01058, 0x01059), (0x01160, 0x011FF), (0x0135D, 0x0135F),
    (0x01712, 0x01714), (0x01732, 0x01734), (0x01752, 0x01753),
    (0x01772, 0x01773), (0x017B4, 0x017B5), (0x017B7, 0x017BD),
    (0x017C6, 0x017C6), (0x017C9, 0x017D3), (0x017DD, 0x017DD),
    (0x0180B, 0x0180D), (0x018A9, 0x018A9), (0x01920, 0x01922),
    (0x01927, 0x01928), (0x01932, 0x01932), (0x01939, 0x0193B),
    (0x01A17, 0x01A18), (0x01A56, 0x01A56), (0x01A58, 0x01A5E),
    (0x01A60, 0x01A60), (0x01A62, 0x01A62), (0x01A65, 0x01A6C),
    (0x01A73, 0x01A7C), (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD),
    (0x01B00, 0x01B03), (0x01B34, 0x01B34), (0x01B36, 0x01B3A),
    (0x01B3C, 0x01B3C), (0x01B42, 0x01B42), (0x01B6B, 0x01B73),
    (0x01B80, 0x01B81), (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9),
    (0x01BAB, 0x01BAB), (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9),
    (0x01BED, 0x01BED), (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33),
    (0x01C36, 0x01C37), (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0),
    (0x01CE2, 0x01CE8), (0x01CED, 0x01CED), (0x01CF4, 0x01CF4),
    (0x01CF8, 0x01CF9), (0x01DC0, 0x01DCA), (0x01DF6, 0x01DF9),
    (0x01DFE, 0x01DFF), (0x0200B, 0x0200F), (0x0202A, 0x0202E),
    (0x02060, 0x02063), (0x0206A, 0x0206F), (0x020D0, 0x020EB),
    (0x0302A, 0x0302F), (0x03099, 0x0309A), (0x0A806, 0x0A806),
    (0x0A80B, 0x0A80B), (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4),
    (0x0A8E0, 0x0A8F1), (0x0A926, 0x0A92D), (0x0A947, 0x0A951),
    (0x0A980, 0x0A982), (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC),
    (0x0AAB0, 0x0AAB0), (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF),
    (0x0AAC1, 0x0AAC1), (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F),
    (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB),
    (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F),
    (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F), (0x10D24, 0x10D27),
    (0x10F46, 0x10F50), (0x11080, 0x11081), (0x110B3, 0x110B6),
    (0x110B9, 0x110BA), (0x110CD, 0x110CD), (0x11100, 0x11102),
    (0x11127, 0x1112B), (0x1112D, 0x11134), (0x11145, 0x11146),
    (0x11180, 0x11181), (0x111B6, 0x111BE), (0x112DF, 0x112DF),
    (0x112E3, 0x112EA), (0x11301, 0x11301), (0x1133B, 0x1133C),
    (0x11340, 0x11340), (0x11366, 0x1136C), (0x11370, 0x11374),
    (0x11438, 0x1143F), (0x11442, 0x11444), (0x11446, 0x11446),
    (0x1145E, 0x1145E), (0x114B3, 0x114B8), (0x114BA, 0x114BA),
    (0x114BF, 0x114C0), (0x114C2, 0x114C3), (0x115B2, 0x115B5),
    (0x115BC, 0x115BD), (0x115BF, 0x115C0), (0x11633, 0x1163A),
    (0x1163D, 0x1163D), (0x1163F, 0x11640), (0x116AB, 0x116AB),
    (0x116AD, 0x116AD), (0x116B0, 0x116B7), (0x1171D, 0x1171F),
    (0x11722, 0x11725), (0x11727, 0x1172B), (0x11A01, 0x11A06),
    (0x11A09, 0x11A0A), (0x11A33, 0x11A38), (0x11A3B, 0x11A3E),
    (0x11A47, 0x11A47), (0x11A51, 0x11A56), (0x11A59, 0x11A5B),
    (0x11A8A, 0x11A96), (0x11A98, 0x11A99), (0x11C30, 0x11C36),
    (0x11C38, 0x11C3D), (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7),
    (0x11CAA, 0x11CB0), (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6),
    (0x11D31, 0x11D36), (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D),
    (0x11D3F, 0x11D45), (0x11D47, 0x11D47), (0x11D90, 0x11D91),
    (0x11D95, 0x11D95), (0x11D97, 0x11D97), (0x11EF3, 0x11EF4),
    (0x16AF0, 0x16AF4), (0x16B30, 0x16B36), (0x16F8F, 0x16F92),
    (0x1BC9D, 0x1BC9E), (0x1D167, 0x1D169), (0x1D173, 0x1D182),
    (0x1D185, 0x1D18B), (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244),
    (0x1D800, 0x1DA36), (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75),
    (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF),
    (0x1E000, 0x1E006), (0x1E008, 0x1E018), (0x1E01B, 0x1E021),
    (0x1E023, 0x1E024), (0x1E026, 0x1E02A), (0x1E8D0, 0x1E8D6),
    (0x1E944, 0x1E94A), (0xE0001, 0xE0001), (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];

/// Unicode 12.0.0 (274 ranges).
pub static ZERO_WIDTH_12_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x007FD, 0x007FD), (0x00859, 0x0085B),
    (0x008D4, 0x008FE), (0x00900, 0x00902), (0x0093A, 0x0093A),
    (0x0093C, 0x0093C), (0x00941, 0x00948), (0x0094D, 0x0094D),
    (0x00951, 0x00955), (0x00962, 0x00963), (0x00981, 0x00981),
    (0x009BC, 0x009BC), (0x009C1, 0x009C4), (0x009CD, 0x009CD),
    (0x009E2, 0x009E3), (0x00A01, 0x00A02), (0x00A3C, 0x00A3C),
    (0x00A41, 0x00A42), (0x00A47, 0x00A48), (0x00A4B, 0x00A4D),
    (0x00A51, 0x00A51), (0x00A70, 0x00A71), (0x00A75, 0x00A75),
    (0x00A81, 0x00A82), (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5),
    (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3),
    (0x00B01, 0x00B01), (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F),
    (0x00B41, 0x00B44), (0x00B4D, 0x00B4D), (0x00B56, 0x00B56),
    (0x00B62, 0x00B63), (0x00B82, 0x00B82), (0x00BC0, 0x00BC0),
    (0x00BCD, 0x00BCD), (0x00C3E, 0x00C40), (0x00C46, 0x00C48),
    (0x00C4A, 0x00C4D), (0x00C55, 0x00C56), (0x00C62, 0x00C63),
    (0x00CBC, 0x00CBC), (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6),
    (0x00CCC, 0x00CCD), (0x00D00, 0x00D00), (0x00D3B, 0x00D3C),
    (0x00D41, 0x00D43), (0x00D4D, 0x00D4D), (0x00D62, 0x00D63),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EBC), (0x00EC8, 0x00ECD),
    (0x00F18, 0x00F19), (0x00F35, 0x00F35), (0x00F37, 0x00F37),
    (0x00F39, 0x00F39), (0x00F71, 0x00F7E), (0x00F80, 0x00F84),
    (0x00F86, 0x00F87), (0x00F8D, 0x00F97), (0x00F99, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x0102D, 0x01030), (0x01032, 0x01032),
    (0x01036, 0x01037), (0x01039, 0x01039), (0x01058, 0x01059),
    (0x01160, 0x011FF), (0x0135D, 0x0135F), (0x01712, 0x01714),
    (0x01732, 0x01734), (0x01752, 0x01753), (0x01772, 0x01773),
    (0x017B4, 0x017B5), (0x017B7, 0x017BD), (0x017C6, 0x017C6),
    (0x017C9, 0x017D3), (0x017DD, 0x017DD), (0x0180B, 0x0180D),
    (0x018A9, 0x018A9), (0x01920, 0x01922), (0x01927, 0x01928),
    (0x01932, 0x01932), (0x01939, 0x0193B), (0x01A17, 0x01A18),
    (0x01A56, 0x01A56), (0x01A58, 0x01A5E), (0x01A60, 0x01A60),
    (0x01A62, 0x01A62), (0x01A65, 0x01A6C), (0x01A73, 0x01A7C),
    (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD), (0x01B00, 0x01B03),
    (0x01B34, 0x01B34), (0x01B36, 0x01B3A), (0x01B3C, 0x01B3C),
    (0x01B42, 0x01B42), (0x01B6B, 0x01B73), (0x01B80, 0x01B81),
    (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9), (0x01BAB, 0x01BAB),
    (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9), (0x01BED, 0x01BED),
    (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33), (0x01C36, 0x01C37),
    (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0), (0x01CE2, 0x01CE8),
    (0x01CED, 0x01CED), (0x01CF4, 0x01CF4), (0x01CF8, 0x01CF9),
    (0x01DC0, 0x01DCA), (0x01DF6, 0x01DF9), (0x01DFE, 0x01DFF),
    (0x0200B, 0x0200F), (0x0202A, 0x0202E), (0x02060, 0x02063),
    (0x0206A, 0x0206F), (0x020D0, 0x020EB), (0x0302A, 0x0302F),
    (0x03099, 0x0309A), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B),
    (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4), (0x0A8E0, 0x0A8F1),
    (0x0A926, 0x0A92D), (0x0A947, 0x0A951), (0x0A980, 0x0A982),
    (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC), (0x0AAB0, 0x0AAB0),
    (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF), (0x0AAC1, 0x0AAC1),
    (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE23),
    (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB), (0x10A01, 0x10A03),
    (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F), (0x10D24, 0x10D27), (0x10F46, 0x10F50),
    (0x11080, 0x11081), (0x110B3, 0x110B6), (0x110B9, 0x110BA),
    (0x110CD, 0x110CD), (0x11100, 0x11102), (0x11127, 0x1112B),
    (0x1112D, 0x11134), (0x11145, 0x11146), (0x11180, 0x11181),
    (0x111B6, 0x111BE), (0x112DF, 0x112DF), (0x112E3, 0x112EA),
    (0x11301, 0x11301), (0x1133B, 0x1133C), (0x11340, 0x11340),
    (0x11366, 0x1136C), (0x11370, 0x11374), (0x11438, 0x1143F),
    (0x11442, 0x11444), (0x11446, 0x11446), (0x1145E, 0x1145E),
    (0x114B3, 0x114B8), (0x114BA, 0x114BA), (0x114BF, 0x114C0),
    (0x114C2, 0x114C3), (0x115B2, 0x115B5), (0x115BC, 0x115BD),
    (0x115BF, 0x115C0), (0x11633, 0x1163A), (0x1163D, 0x1163D),
    (0x1163F, 0x11640), (0x116AB, 0x116AB), (0x116AD, 0x116AD),
    (0x116B0, 0x116B7), (0x1171D, 0x1171F), (0x11722, 0x11725),
    (0x11727, 0x1172B), (0x119D4, 0x119D7), (0x119DA, 0x119DB),
    (0x119E0, 0x119E0), (0x11A01, 0x11A06), (0x11A09, 0x11A0A),
    (0x11A33, 0x11A38), (0x11A3B, 0x11A3E), (0x11A47, 0x11A47),
    (0x11A51, 0x11A56), (0x11A59, 0x11A5B), (0x11A84, 0x11A96),
    (0x11A98, 0x11A99), (0x11C30, 0x11C36), (0x11C38, 0x11C3D),
    (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7), (0x11CAA, 0x11CB0),
    (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6), (0x11D31, 0x11D36),
    (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D), (0x11D3F, 0x11D45),
    (0x11D47, 0x11D47), (0x11D90, 0x11D91), (0x11D95, 0x11D95),
    (0x11D97, 0x11D97), (0x11EF3, 0x11EF4), (0x13430, 0x13438),
    (0x16AF0, 0x16AF4), (0x16B30, 0x16B36), (0x16F4F, 0x16F4F),
    (0x16F8F, 0x16F92), (0x1BC9D, 0x1BC9E), (0x1D167, 0x1D169),
    (0x1D173, 0x1D182), (0x1D185, 0x1D18B), (0x1D1AA, 0x1D1AD),
    (0x1D242, 0x1D244), (0x1D800, 0x1DA36), (0x1DA3B, 0x1DA6C),
    (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F),
    (0x1DAA1, 0x1DAAF), (0x1E000, 0x1E006), (0x1E008, 0x1E018),
    (0x1E01B, 0x1E021), (0x1E023, 0x1E024), (0x1E026, 0x1E02A),
    (0x1E130, 0x1E136), (0x1E2EC, 0x1E2EF), (0x1E8D0, 0x1E8D6),
    (0x1E944, 0x1E94A), (0xE0001, 0xE0001), (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];

/// Unicode 12.1.0 (274 ranges).
pub static ZERO_WIDTH_12_1_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x007FD, 0x007FD), (0x00859, 0x0085B),
    (0x008D4, 0x008FE), (0x00900, 0x00902), (0x0093A, 0x0093A),
    (0x0093C, 0x0093C), (0x00941, 0x00948), (0x0094D, 0x0094D),
    (0x00951, 0x00955), (0x00962, 0x00963), (0x00981, 0x00981),
    (0x009BC, 0x009BC), (0x009C1, 0x009C4), (0x009CD, 0x009CD),
    (0x009E2, 0x009E3), (0x00A01, 0x00A02), (0x00A3C, 0x00A3C),
    (0x00A41, 0x00A42), (0x00A47, 0x00A48), (0x00A4B, 0x00A4D),
    (0x00A51, 0x00A51), (0x00A70, 0x00A71), (0x00A75, 0x00A75),
    (0x00A81, 0x00A82), (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5),
    (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3),
    (0x00B01, 0x00B01), (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F),
    (0x00B41, 0x00B44), (0x00B4D, 0x00B4D), (0x00B56, 0x00B56),
    (0x00B62, 0x00B63), (0x00B82, 0x00B82), (0x00BC0, 0x00BC0),
    (0x00BCD, 0x00BCD), (0x00C3E, 0x00C40), (0x00C46, 0x00C48),
    (0x00C4A, 0x00C4D), (0x00C55, 0x00C56), (0x00C62, 0x00C63),
    (0x00CBC, 0x00CBC), (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6),
    (0x00CCC, 0x00CCD), (0x00D00, 0x00D00), (0x00D3B, 0x00D3C),
    (0x00D41, 0x00D43), (0x00D4D, 0x00D4D), (0x00D62, 0x00D63),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EBC), (0x00EC8, 0x00ECD),
    (0x00F18, 0x00F19), (0x00F35, 0x00F35), (0x00F37, 0x00F37),
    (0x00F39, 0x00F39), (0x00F71, 0x00F7E), (0x00F80, 0x00F84),
    (0x00F86, 0x00F87), (0x00F8D, 0x00F97), (0x00F99, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x0102D, 0x01030), (0x01032, 0x01032),
    (0x01036, 0x01037), (0x01039, 0x01039), (0x01058, 0x01059),
    (0x01160, 0x011FF), (0x0135D, 0x0135F), (0x01712, 0x01714),
    (0x01732, 0x01734), (0x01752, 0x01753), (0x01772, 0x01773),
    (0x017B4, 0x017B5), (0x017B7, 0x017BD), (0x017C6, 0x017C6),
    (0x017C9, 0x017D3), (0x017DD, 0x017DD), (0x0180B, 0x0180D),
    (0x018A9, 0x018A9), (0x01920, 0x01922), (0x01927, 0x01928),
    (0x01932, 0x01932), (0x01939, 0x0193B), (0x01A17, 0x01A18),
    (0x01A56, 0x01A56), (0x01A58, 0x01A5E), (0x01A60, 0x01A60),
    (0x01A62, 0x01A62), (0x01A65, 0x01A6C), (0x01A73, 0x01A7C),
    (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD), (0x01B00, 0x01B03),
    (0x01B34, 0x01B34), (0x01B36, 0x01B3A), (0x01B3C, 0x01B3C),
    (0x01B42, 0x01B42), (0x01B6B, 0x01B73), (0x01B80, 0x01B81),
    (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9), (0x01BAB, 0x01BAB),
    (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9), (0x01BED, 0x01BED),
    (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33), (0x01C36, 0x01C37),
    (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0), (0x01CE2, 0x01CE8),
    (0x01CED, 0x01CED), (0x01CF4, 0x01CF4), (0x01CF8, 0x01CF9),
    (0x01DC0, 0x01DCA), (0x01DF6, 0x01DF9), (0x01DFE, 0x01DFF),
    (0x0200B, 0x0200F), (0x0202A, 0x0202E), (0x02060, 0x02063),
    (0x0206A, 0x0206F), (0x020D0, 0x020EB), (0x0302A, 0x0302F),
    (0x03099, 0x0309A), (0x0A806, 0x0A806), (0x0A80B, 0x0A80B),
    (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4), (0x0A8E0, 0x0A8F1),
    (0x0A926, 0x0A92D), (0x0A947, 0x0A951), (0x0A980, 0x0A982),
    (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC), (0x0AAB0, 0x0AAB0),
    (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF), (0x0AAC1, 0x0AAC1),
    (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE23),
    (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB), (0x10A01, 0x10A03),
    (0x10A05, 0x10A06), (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F), (0x10D24, 0x10D27), (0x10F46, 0x10F50),
    (0x11080, 0x11081), (0x110B3, 0x110B6), (0x110B9, 0x110BA),
    (0x110CD, 0x110CD), (0x11100, 0x11102), (0x11127, 0x1112B),
    (0x1112D, 0x11134), (0x11145, 0x11146), (0x11180, 0x11181),
    (0x111B6, 0x111BE), (0x112DF, 0x112DF), (0x112E3, 0x112EA),
    (0x11301, 0x11301), (0x1133B, 0x1133C), (0x11340, 0x11340),
    (0x11366, 0x1136C), (0x11370, 0x11374), (0x11438, 0x1143F),
    (0x11442, 0x11444), (0x11446, 0x11446), (0x1145E, 0x1145E),
    (0x114B3, 0x114B8), (0x114BA, 0x114BA), (0x114BF, 0x114C0),
    (0x114C2, 0x114C3), (0x115B2, 0x115B5), (0x115BC, 0x115BD),
    (0x115BF, 0x115C0), (0x11633, 0x1163A), (0x1163D, 0x1163D),
    (0x1163F, 0x11640), (0x116AB, 0x116AB), (0x116AD, 0x116AD),
    (0x116B0, 0x116B7), (0x1171D, 0x1171F), (0x11722, 0x11725),
    (0x11727, 0x1172B), (0x119D4, 0x119D7), (0x119DA, 0x119DB),
    (0x119E0, 0x119E0), (0x11A01, 0x11A06), (0x11A09, 0x11A0A),
    (0x11A33, 0x11A38), (0x11A3B, 0x11A3E), (0x11A47, 0x11A47),
    (0x11A51, 0x11A56), (0x11A59, 0x11A5B), (0x11A84, 0x11A96),
    (0x11A98, 0x11A99), (0x11C30, 0x11C36), (0x11C38, 0x11C3D),
    (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7), (0x11CAA, 0x11CB0),
    (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6), (0x11D31, 0x11D36),
    (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D), (0x11D3F, 0x11D45),
    (0x11D47, 0x11D47), (0x11D90, 0x11D91), (0x11D95, 0x11D95),
    (0x11D97, 0x11D97), (0x11EF3, 0x11EF4), (0x13430, 0x13438),
    (0x16AF0, 0x16AF4), (0x16B30, 0x16B36), (0x16F4F, 0x16F4F),
    (0x16F8F, 0x16F92), (0x1BC9D, 0x1BC9E), (0x1D167, 0x1D169),
    (0x1D173, 0x1D182), (0x1D185, 0x1D18B), (0x1D1AA, 0x1D1AD),
    (0x1D242, 0x1D244), (0x1D800, 0x1DA36), (0x1DA3B, 0x1DA6C),
    (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F),
    (0x1DAA1, 0x1DAAF), (0x1E000, 0x1E006), (0x1E008, 0x1E018),
    (0x1E01B, 0x1E021), (0x1E023, 0x1E024), (0x1E026, 0x1E02A),
    (0x1E130, 0x1E136), (0x1E2EC, 0x1E2EF), (0x1E8D0, 0x1E8D6),
    (0x1E944, 0x1E94A), (0xE0001, 0xE0001), (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];

/// Unicode 13.0.0 (282 ranges).
pub static ZERO_WIDTH_13_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x007FD, 0x007FD), (0x00859, 0x0085B),
    (0x008BE, 0x008FE), (0x00900, 0x00902), (0x0093A, 0x0093A),
    (0x0093C, 0x0093C), (0x00941, 0x00948), (0x0094D, 0x0094D),
    (0x00951, 0x00955), (0x00962, 0x00963), (0x00981, 0x00981),
    (0x009BC, 0x009BC), (0x009C1, 0x009C4), (0x009CD, 0x009CD),
    (0x009E2, 0x009E3), (0x00A01, 0x00A02), (0x00A3C, 0x00A3C),
    (0x00A41, 0x00A42), (0x00A47, 0x00A48), (0x00A4B, 0x00A4D),
    (0x00A51, 0x00A51), (0x00A70, 0x00A71), (0x00A75, 0x00A75),
    (0x00A81, 0x00A82), (0x00ABC, 0x00ABC), (0x00AC1, 0x00AC5),
    (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD), (0x00AE2, 0x00AE3),
    (0x00B01, 0x00B01), (0x00B3C, 0x00B3C), (0x00B3F, 0x00B3F),
    (0x00B41, 0x00B44), (0x00B4D, 0x00B4D), (0x00B55, 0x00B56),
    (0x00B62, 0x00B63), (0x00B82, 0x00B82), (0x00BC0, 0x00BC0),
    (0x00BCD, 0x00BCD), (0x00C3E, 0x00C40), (0x00C46, 0x00C48),
    (0x00C4A, 0x00C4D), (0x00C55, 0x00C56), (0x00C62, 0x00C63),
    (0x00CBC, 0x00CBC), (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6),
    (0x00CCC, 0x00CCD), (0x00D00, 0x00D00), (0x00D3B, 0x00D3C),
    (0x00D41, 0x00D43), (0x00D4D, 0x00D4D), (0x00D62, 0x00D63),
    (0x00D81, 0x00D81), (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4),
    (0x00DD6, 0x00DD6), (0x00E31, 0x00E31), (0x00E34, 0x00E3A),
    (0x00E47, 0x00E4E), (0x00EB1, 0x00EB1), (0x00EB4, 0x00EBC),
    (0x00EC8, 0x00ECD), (0x00F18, 0x00F19), (0x00F35, 0x00F35),
    (0x00F37, 0x00F37), (0x00F39, 0x00F39), (0x00F71, 0x00F7E),
    (0x00F80, 0x00F84), (0x00F86, 0x00F87), (0x00F8D, 0x00F97),
    (0x00F99, 0x00FBC), (0x00FC6, 0x00FC6), (0x0102D, 0x01030),
    (0x01032, 0x01032), (0x01036, 0x01037), (0x01039, 0x01039),
    (0x01058, 0x01059), (0x01160, 0x011FF), (0x0135D, 0x0135F),
    (0x01712, 0x01714), (0x01732, 0x01734), (0x01752, 0x01753),
    (0x01772, 0x01773), (0x017B4, 0x017B5), (0x017B7, 0x017BD),
    (0x017C6, 0x017C6), (0x017C9, 0x017D3), (0x017DD, 0x017DD),
    (0x0180B, 0x0180D), (0x018A9, 0x018A9), (0x01920, 0x01922),
    (0x01927, 0x01928), (0x01932, 0x01932), (0x01939, 0x0193B),
    (0x01A17, 0x01A18), (0x01A56, 0x01A56), (0x01A58, 0x01A5E),
    (0x01A60, 0x01A60), (0x01A62, 0x01A62), (0x01A65, 0x01A6C),
    (0x01A73, 0x01A7C), (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD),
    (0x01ABF, 0x01AC0), (0x01B00, 0x01B03), (0x01B34, 0x01B34),
    (0x01B36, 0x01B3A), (0x01B3C, 0x01B3C), (0x01B42, 0x01B42),
    (0x01B6B, 0x01B73), (0x01B80, 0x01B81), (0x01BA2, 0x01BA5),
    (0x01BA8, 0x01BA9), (0x01BAB, 0x01BAB), (0x01BE6, 0x01BE6),
    (0x01BE8, 0x01BE9), (0x01BED, 0x01BED), (0x01BEF, 0x01BF1),
    (0x01C2C, 0x01C33), (0x01C36, 0x01C37), (0x01CD0, 0x01CD2),
    (0x01CD4, 0x01CE0), (0x01CE2, 0x01CE8), (0x01CED, 0x01CED),
    (0x01CF4, 0x01CF4), (0x01CF8, 0x01CF9), (0x01DC0, 0x01DCA),
    (0x01DF6, 0x01DF9), (0x01DFE, 0x01DFF), (0x0200B, 0x0200F),
    (0x0202A, 0x0202E), (0x02060, 0x02063), (0x0206A, 0x0206F),
    (0x020D0, 0x020EB), (0x0302A, 0x0302F), (0x03099, 0x0309A),
    (0x0A806, 0x0A806), (0x0A80B, 0x0A80B), (0x0A825, 0x0A826),
    (0x0A8C4, 0x0A8C4), (0x0A8E0, 0x0A8F1), (0x0A926, 0x0A92D),
    (0x0A947, 0x0A951), (0x0A980, 0x0A982), (0x0A9B3, 0x0A9B9),
    (0x0A9BC, 0x0A9BC), (0x0AAB0, 0x0AAB0), (0x0AAB2, 0x0AAB8),
    (0x0AABE, 0x0AABF), (0x0AAC1, 0x0AAC1), (0x0FB1E, 0x0FB1E),
    (0x0FE00, 0x0FE0F), (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF),
    (0x0FFF9, 0x0FFFB), (0x10A01, 0x10A03), (0x10A05, 0x10A06),
    (0x10A0C, 0x10A0F), (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F),
    (0x10D24, 0x10D27), (0x10EAB, 0x10EAC), (0x10F46, 0x10F50),
    (0x11080, 0x11081), (0x110B3, 0x110B6), (0x110B9, 0x110BA),
    (0x110CD, 0x110CD), (0x11100, 0x11102), (0x11127, 0x1112B),
    (0x1112D, 0x11134), (0x11145, 0x11146), (0x11180, 0x11181),
    (0x111B6, 0x111BE), (0x111CF, 0x111CF), (0x112DF, 0x112DF),
    (0x112E3, 0x112EA), (0x11301, 0x11301), (0x1133B, 0x1133C),
    (0x11340, 0x11340), (0x11366, 0x1136C), (0x11370, 0x11374),
    (0x11438, 0x1143F), (0x11442, 0x11444), (0x11446, 0x11446),
    (0x1145E, 0x1145E), (0x114B3, 0x114B8), (0x114BA, 0x114BA),
    (0x114BF, 0x114C0), (0x114C2, 0x114C3), (0x115B2, 0x115B5),
    (0x115BC, 0x115BD), (0x115BF, 0x115C0), (0x11633, 0x1163A),
    (0x1163D, 0x1163D), (0x1163F, 0x11640), (0x116AB, 0x116AB),
    (0x116AD, 0x116AD), (0x116B0, 0x116B7), (0x1171D, 0x1171F),
    (0x11722, 0x11725), (0x11727, 0x1172B), (0x1193B, 0x1193C),
    (0x1193E, 0x1193E), (0x11943, 0x11943), (0x119D4, 0x119D7),
    (0x119DA, 0x119DB), (0x119E0, 0x119E0), (0x11A01, 0x11A06),
    (0x11A09, 0x11A0A), (0x11A33, 0x11A38), (0x11A3B, 0x11A3E),
    (0x11A47, 0x11A47), (0x11A51, 0x11A56), (0x11A59, 0x11A5B),
    (0x11A84, 0x11A96), (0x11A98, 0x11A99), (0x11C30, 0x11C36),
    (0x11C38, 0x11C3D), (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7),
    (0x11CAA, 0x11CB0), (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6),
    (0x11D31, 0x11D36), (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D),
    (0x11D3F, 0x11D45), (0x11D47, 0x11D47), (0x11D90, 0x11D91),
    (0x11D95, 0x11D95), (0x11D97, 0x11D97), (0x11EF3, 0x11EF4),
    (0x13430, 0x13438), (0x16AF0, 0x16AF4), (0x16B30, 0x16B36),
    (0x16F4F, 0x16F4F), (0x16F8F, 0x16F92), (0x16FE4, 0x16FE4),
    (0x1BC9D, 0x1BC9E), (0x1D167, 0x1D169), (0x1D173, 0x1D182),
    (0x1D185, 0x1D18B), (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244),
    (0x1D800, 0x1DA36), (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75),
    (0x1DA84, 0x1DA84), (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF),
    (0x1E000, 0x1E006), (0x1E008, 0x1E018), (0x1E01B, 0x1E021),
    (0x1E023, 0x1E024), (0x1E026, 0x1E02A), (0x1E130, 0x1E136),
    (0x1E2EC, 0x1E2EF), (0x1E8D0, 0x1E8D6), (0x1E944, 0x1E94A),
    (0xE0001, 0xE0001), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 14.0.0 (288 ranges).
pub static ZERO_WIDTH_14_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x007FD, 0x007FD), (0x00859, 0x0085B),
    (0x00897, 0x00897), (0x008BE, 0x008FE), (0x00900, 0x00902),
    (0x0093A, 0x0093A), (0x0093C, 0x0093C), (0x00941, 0x00948),
    (0x0094D, 0x0094D), (0x00951, 0x00955), (0x00962, 0x00963),
    (0x00981, 0x00981), (0x009BC, 0x009BC), (0x009C1, 0x009C4),
    (0x009CD, 0x009CD), (0x009E2, 0x009E3), (0x00A01, 0x00A02),
    (0x00A3C, 0x00A3C), (0x00A41, 0x00A42), (0x00A47, 0x00A48),
    (0x00A4B, 0x00A4D), (0x00A51, 0x00A51), (0x00A70, 0x00A71),
    (0x00A75, 0x00A75), (0x00A81, 0x00A82), (0x00ABC, 0x00ABC),
    (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD),
    (0x00AE2, 0x00AE3), (0x00B01, 0x00B01), (0x00B3C, 0x00B3C),
    (0x00B3F, 0x00B3F), (0x00B41, 0x00B44), (0x00B4D, 0x00B4D),
    (0x00B55, 0x00B56), (0x00B62, 0x00B63), (0x00B82, 0x00B82),
    (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD), (0x00C3C, 0x00C3C),
    (0x00C3E, 0x00C40), (0x00C46, 0x00C48), (0x00C4A, 0x00C4D),
    (0x00C55, 0x00C56), (0x00C62, 0x00C63), (0x00CBC, 0x00CBC),
    (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD),
    (0x00D00, 0x00D00), (0x00D3B, 0x00D3C), (0x00D41, 0x00D43),
    (0x00D4D, 0x00D4D), (0x00D62, 0x00D63), (0x00D81, 0x00D81),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EBC), (0x00EC8, 0x00ECD),
    (0x00F18, 0x00F19), (0x00F35, 0x00F35), (0x00F37, 0x00F37),
    (0x00F39, 0x00F39), (0x00F71, 0x00F7E), (0x00F80, 0x00F84),
    (0x00F86, 0x00F87), (0x00F8D, 0x00F97), (0x00F99, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x0102D, 0x01030), (0x01032, 0x01032),
    (0x01036, 0x01037), (0x01039, 0x01039), (0x01058, 0x01059),
    (0x01160, 0x011FF), (0x0135D, 0x0135F), (0x01712, 0x01714),
    (0x01732, 0x01734), (0x01752, 0x01753), (0x01772, 0x01773),
    (0x017B4, 0x017B5), (0x017B7, 0x017BD), (0x017C6, 0x017C6),
    (0x017C9, 0x017D3), (0x017DD, 0x017DD), (0x0180B, 0x0180D),
    (0x018A9, 0x018A9), (0x01920, 0x01922), (0x01927, 0x01928),
    (0x01932, 0x01932), (0x01939, 0x0193B), (0x01A17, 0x01A18),
    (0x01A56, 0x01A56), (0x01A58, 0x01A5E), (0x01A60, 0x01A60),
    (0x01A62, 0x01A62), (0x01A65, 0x01A6C), (0x01A73, 0x01A7C),
    (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD), (0x01ABF, 0x01ACE),
    (0x01B00, 0x01B03), (0x01B34, 0x01B34), (0x01B36, 0x01B3A),
    (0x01B3C, 0x01B3C), (0x01B42, 0x01B42), (0x01B6B, 0x01B73),
    (0x01B80, 0x01B81), (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9),
    (0x01BAB, 0x01BAB), (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9),
    (0x01BED, 0x01BED), (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33),
    (0x01C36, 0x01C37), (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0),
    (0x01CE2, 0x01CE8), (0x01CED, 0x01CED), (0x01CF4, 0x01CF4),
    (0x01CF8, 0x01CF9), (0x01DC0, 0x01DCA), (0x01DF6, 0x01DF9),
    (0x01DFE, 0x01DFF), (0x0200B, 0x0200F), (0x0202A, 0x0202E),
    (0x02060, 0x02063), (0x0206A, 0x0206F), (0x020D0, 0x020EB),
    (0x0302A, 0x0302F), (0x03099, 0x0309A), (0x0A806, 0x0A806),
    (0x0A80B, 0x0A80B), (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4),
    (0x0A8E0, 0x0A8F1), (0x0A926, 0x0A92D), (0x0A947, 0x0A951),
    (0x0A980, 0x0A982), (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC),
    (0x0AAB0, 0x0AAB0), (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF),
    (0x0AAC1, 0x0AAC1), (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F),
    (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB),
    (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F),
    (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F), (0x10D24, 0x10D27),
    (0x10EAB, 0x10EAC), (0x10F46, 0x10F50), (0x10F82, 0x10F85),
    (0x11070, 0x11070), (0x11080, 0x11081), (0x110B3, 0x110B6),
    (0x110B9, 0x110BA), (0x110C2, 0x110C2), (0x110CD, 0x110CD),
    (0x11100, 0x11102), (0x11127, 0x1112B), (0x1112D, 0x11134),
    (0x11145, 0x11146), (0x11180, 0x11181), (0x111B6, 0x111BE),
    (0x111CF, 0x111CF), (0x112DF, 0x112DF), (0x112E3, 0x112EA),
    (0x11301, 0x11301), (0x1133B, 0x1133C), (0x11340, 0x11340),
    (0x11366, 0x1136C), (0x11370, 0x11374), (0x11438, 0x1143F),
    (0x11442, 0x11444), (0x11446, 0x11446), (0x1145E, 0x1145E),
    (0x114B3, 0x114B8), (0x114BA, 0x114BA), (0x114BF, 0x114C0),
    (0x114C2, 0x114C3), (0x115B2, 0x115B5), (0x115BC, 0x115BD),
    (0x115BF, 0x115C0), (0x11633, 0x1163A), (0x1163D, 0x1163D),
    (0x1163F, 0x11640), (0x116AB, 0x116AB), (0x116AD, 0x116AD),
    (0x116B0, 0x116B7), (0x1171D, 0x1171F), (0x11722, 0x11725),
    (0x11727, 0x1172B), (0x1193B, 0x1193C), (0x1193E, 0x1193E),
    (0x11943, 0x11943), (0x119D4, 0x119D7), (0x119DA, 0x119DB),
    (0x119E0, 0x119E0), (0x11A01, 0x11A06), (0x11A09, 0x11A0A),
    (0x11A33, 0x11A38), (0x11A3B, 0x11A3E), (0x11A47, 0x11A47),
    (0x11A51, 0x11A56), (0x11A59, 0x11A5B), (0x11A84, 0x11A96),
    (0x11A98, 0x11A99), (0x11C30, 0x11C36), (0x11C38, 0x11C3D),
    (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7), (0x11CAA, 0x11CB0),
    (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6), (0x11D31, 0x11D36),
    (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D), (0x11D3F, 0x11D45),
    (0x11D47, 0x11D47), (0x11D90, 0x11D91), (0x11D95, 0x11D95),
    (0x11D97, 0x11D97), (0x11EF3, 0x11EF4), (0x13430, 0x13438),
    (0x16AF0, 0x16AF4), (0x16B30, 0x16B36), (0x16F4F, 0x16F4F),
    (0x16F8F, 0x16F92), (0x16FE4, 0x16FE4), (0x1BC9D, 0x1BC9E),
    (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1D800, 0x1DA36),
    (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84),
    (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF), (0x1E000, 0x1E006),
    (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024),
    (0x1E026, 0x1E02A), (0x1E130, 0x1E136), (0x1E290, 0x1E2AE),
    (0x1E2EC, 0x1E2EF), (0x1E8D0, 0x1E8D6), (0x1E944, 0x1E94A),
    (0xE0001, 0xE0001), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 15.0.0 (296 ranges).
pub static ZERO_WIDTH_15_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x007FD, 0x007FD), (0x00859, 0x0085B),
    (0x00897, 0x00897), (0x008BE, 0x008FE), (0x00900, 0x00902),
    (0x0093A, 0x0093A), (0x0093C, 0x0093C), (0x00941, 0x00948),
    (0x0094D, 0x0094D), (0x00951, 0x00955), (0x00962, 0x00963),
    (0x00981, 0x00981), (0x009BC, 0x009BC), (0x009C1, 0x009C4),
    (0x009CD, 0x009CD), (0x009E2, 0x009E3), (0x00A01, 0x00A02),
    (0x00A3C, 0x00A3C), (0x00A41, 0x00A42), (0x00A47, 0x00A48),
    (0x00A4B, 0x00A4D), (0x00A51, 0x00A51), (0x00A70, 0x00A71),
    (0x00A75, 0x00A75), (0x00A81, 0x00A82), (0x00ABC, 0x00ABC),
    (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD),
    (0x00AE2, 0x00AE3), (0x00B01, 0x00B01), (0x00B3C, 0x00B3C),
    (0x00B3F, 0x00B3F), (0x00B41, 0x00B44), (0x00B4D, 0x00B4D),
    (0x00B55, 0x00B56), (0x00B62, 0x00B63), (0x00B82, 0x00B82),
    (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD), (0x00C3C, 0x00C3C),
    (0x00C3E, 0x00C40), (0x00C46, 0x00C48), (0x00C4A, 0x00C4D),
    (0x00C55, 0x00C56), (0x00C62, 0x00C63), (0x00CBC, 0x00CBC),
    (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD),
    (0x00D00, 0x00D00), (0x00D3B, 0x00D3C), (0x00D41, 0x00D43),
    (0x00D4D, 0x00D4D), (0x00D62, 0x00D63), (0x00D81, 0x00D81),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EBC), (0x00EC8, 0x00ECD),
    (0x00F18, 0x00F19), (0x00F35, 0x00F35), (0x00F37, 0x00F37),
    (0x00F39, 0x00F39), (0x00F71, 0x00F7E), (0x00F80, 0x00F84),
    (0x00F86, 0x00F87), (0x00F8D, 0x00F97), (0x00F99, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x0102D, 0x01030), (0x01032, 0x01032),
    (0x01036, 0x01037), (0x01039, 0x01039), (0x01058, 0x01059),
    (0x01160, 0x011FF), (0x0135D, 0x0135F), (0x01712, 0x01714),
    (0x01732, 0x01734), (0x01752, 0x01753), (0x01772, 0x01773),
    (0x017B4, 0x017B5), (0x017B7, 0x017BD), (0x017C6, 0x017C6),
    (0x017C9, 0x017D3), (0x017DD, 0x017DD), (0x0180B, 0x0180D),
    (0x018A9, 0x018A9), (0x01920, 0x01922), (0x01927, 0x01928),
    (0x01932, 0x01932), (0x01939, 0x0193B), (0x01A17, 0x01A18),
    (0x01A56, 0x01A56), (0x01A58, 0x01A5E), (0x01A60, 0x01A60),
    (0x01A62, 0x01A62), (0x01A65, 0x01A6C), (0x01A73, 0x01A7C),
    (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD), (0x01ABF, 0x01ACE),
    (0x01B00, 0x01B03), (0x01B34, 0x01B34), (0x01B36, 0x01B3A),
    (0x01B3C, 0x01B3C), (0x01B42, 0x01B42), (0x01B6B, 0x01B73),
    (0x01B80, 0x01B81), (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9),
    (0x01BAB, 0x01BAB), (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9),
    (0x01BED, 0x01BED), (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33),
    (0x01C36, 0x01C37), (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0),
    (0x01CE2, 0x01CE8), (0x01CED, 0x01CED), (0x01CF4, 0x01CF4),
    (0x01CF8, 0x01CF9), (0x01DC0, 0x01DCA), (0x01DF6, 0x01DF9),
    (0x01DFE, 0x01DFF), (0x0200B, 0x0200F), (0x0202A, 0x0202E),
    (0x02060, 0x02063), (0x0206A, 0x0206F), (0x020D0, 0x020EB),
    (0x0302A, 0x0302F), (0x03099, 0x0309A), (0x0A806, 0x0A806),
    (0x0A80B, 0x0A80B), (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4),
    (0x0A8E0, 0x0A8F1), (0x0A926, 0x0A92D), (0x0A947, 0x0A951),
    (0x0A980, 0x0A982), (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC),
    (0x0AAB0, 0x0AAB0), (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF),
    (0x0AAC1, 0x0AAC1), (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F),
    (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB),
    (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F),
    (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F), (0x10D24, 0x10D27),
    (0x10EAB, 0x10EAC), (0x10EFD, 0x10EFF), (0x10F46, 0x10F50),
    (0x10F82, 0x10F85), (0x11070, 0x11070), (0x11080, 0x11081),
    (0x110B3, 0x110B6), (0x110B9, 0x110BA), (0x110C2, 0x110C2),
    (0x110CD, 0x110CD), (0x11100, 0x11102), (0x11127, 0x1112B),
    (0x1112D, 0x11134), (0x11145, 0x11146), (0x11180, 0x11181),
    (0x111B6, 0x111BE), (0x111CF, 0x111CF), (0x11241, 0x11241),
    (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11301, 0x11301),
    (0x1133B, 0x1133C), (0x11340, 0x11340), (0x11366, 0x1136C),
    (0x11370, 0x11374), (0x11438, 0x1143F), (0x11442, 0x11444),
    (0x11446, 0x11446), (0x1145E, 0x1145E), (0x114B3, 0x114B8),
    (0x114BA, 0x114BA), (0x114BF, 0x114C0), (0x114C2, 0x114C3),
    (0x115B2, 0x115B5), (0x115BC, 0x115BD), (0x115BF, 0x115C0),
    (0x11633, 0x1163A), (0x1163D, 0x1163D), (0x1163F, 0x11640),
    (0x116AB, 0x116AB), (0x116AD, 0x116AD), (0x116B0, 0x116B7),
    (0x1171D, 0x1171F), (0x11722, 0x11725), (0x11727, 0x1172B),
    (0x1193B, 0x1193C), (0x1193E, 0x1193E), (0x11943, 0x11943),
    (0x119D4, 0x119D7), (0x119DA, 0x119DB), (0x119E0, 0x119E0),
    (0x11A01, 0x11A06), (0x11A09, 0x11A0A), (0x11A33, 0x11A38),
    (0x11A3B, 0x11A3E), (0x11A47, 0x11A47), (0x11A51, 0x11A56),
    (0x11A59, 0x11A5B), (0x11A84, 0x11A96), (0x11A98, 0x11A99),
    (0x11C30, 0x11C36), (0x11C38, 0x11C3D), (0x11C3F, 0x11C3F),
    (0x11C92, 0x11CA7), (0x11CAA, 0x11CB0), (0x11CB2, 0x11CB3),
    (0x11CB5, 0x11CB6), (0x11D31, 0x11D36), (0x11D3A, 0x11D3A),
    (0x11D3C, 0x11D3D), (0x11D3F, 0x11D45), (0x11D47, 0x11D47),
    (0x11D90, 0x11D91), (0x11D95, 0x11D95), (0x11D97, 0x11D97),
    (0x11EF3, 0x11EF4), (0x11F00, 0x11F01), (0x11F36, 0x11F3A),
    (0x11F40, 0x11F40), (0x11F42, 0x11F42), (0x13430, 0x13438),
    (0x16AF0, 0x16AF4), (0x16B30, 0x16B36), (0x16F4F, 0x16F4F),
    (0x16F8F, 0x16F92), (0x16FE4, 0x16FE4), (0x1BC9D, 0x1BC9E),
    (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1D800, 0x1DA36),
    (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84),
    (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF), (0x1E000, 0x1E006),
    (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024),
    (0x1E026, 0x1E02A), (0x1E08F, 0x1E08F), (0x1E130, 0x1E136),
    (0x1E290, 0x1E2AE), (0x1E2EC, 0x1E2EF), (0x1E4EC, 0x1E4EF),
    (0x1E8D0, 0x1E8D6), (0x1E944, 0x1E94A), (0xE0001, 0xE0001),
    (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 15.1.0 (296 ranges).
pub static ZERO_WIDTH_15_1_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x007FD, 0x007FD), (0x00859, 0x0085B),
    (0x00897, 0x00897), (0x008BE, 0x008FE), (0x00900, 0x00902),
    (0x0093A, 0x0093A), (0x0093C, 0x0093C), (0x00941, 0x00948),
    (0x0094D, 0x0094D), (0x00951, 0x00955), (0x00962, 0x00963),
    (0x00981, 0x00981), (0x009BC, 0x009BC), (0x009C1, 0x009C4),
    (0x009CD, 0x009CD), (0x009E2, 0x009E3), (0x00A01, 0x00A02),
    (0x00A3C, 0x00A3C), (0x00A41, 0x00A42), (0x00A47, 0x00A48),
    (0x00A4B, 0x00A4D), (0x00A51, 0x00A51), (0x00A70, 0x00A71),
    (0x00A75, 0x00A75), (0x00A81, 0x00A82), (0x00ABC, 0x00ABC),
    (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD),
    (0x00AE2, 0x00AE3), (0x00B01, 0x00B01), (0x00B3C, 0x00B3C),
    (0x00B3F, 0x00B3F), (0x00B41, 0x00B44), (0x00B4D, 0x00B4D),
    (0x00B55, 0x00B56), (0x00B62, 0x00B63), (0x00B82, 0x00B82),
    (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD), (0x00C3C, 0x00C3C),
    (0x00C3E, 0x00C40), (0x00C46, 0x00C48), (0x00C4A, 0x00C4D),
    (0x00C55, 0x00C56), (0x00C62, 0x00C63), (0x00CBC, 0x00CBC),
    (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD),
    (0x00D00, 0x00D00), (0x00D3B, 0x00D3C), (0x00D41, 0x00D43),
    (0x00D4D, 0x00D4D), (0x00D62, 0x00D63), (0x00D81, 0x00D81),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EBC), (0x00EC8, 0x00ECD),
    (0x00F18, 0x00F19), (0x00F35, 0x00F35), (0x00F37, 0x00F37),
    (0x00F39, 0x00F39), (0x00F71, 0x00F7E), (0x00F80, 0x00F84),
    (0x00F86, 0x00F87), (0x00F8D, 0x00F97), (0x00F99, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x0102D, 0x01030), (0x01032, 0x01032),
    (0x01036, 0x01037), (0x01039, 0x01039), (0x01058, 0x01059),
    (0x01160, 0x011FF), (0x0135D, 0x0135F), (0x01712, 0x01714),
    (0x01732, 0x01734), (0x01752, 0x01753), (0x01772, 0x01773),
    (0x017B4, 0x017B5), (0x017B7, 0x017BD), (0x017C6, 0x017C6),
    (0x017C9, 0x017D3), (0x017DD, 0x017DD), (0x0180B, 0x0180D),
    (0x018A9, 0x018A9), (0x01920, 0x01922), (0x01927, 0x01928),
    (0x01932, 0x01932), (0x01939, 0x0193B), (0x01A17, 0x01A18),
    (0x01A56, 0x01A56), (0x01A58, 0x01A5E), (0x01A60, 0x01A60),
    (0x01A62, 0x01A62), (0x01A65, 0x01A6C), (0x01A73, 0x01A7C),
    (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD), (0x01ABF, 0x01ACE),
    (0x01B00, 0x01B03), (0x01B34, 0x01B34), (0x01B36, 0x01B3A),
    (0x01B3C, 0x01B3C), (0x01B42, 0x01B42), (0x01B6B, 0x01B73),
    (0x01B80, 0x01B81), (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9),
    (0x01BAB, 0x01BAB), (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9),
    (0x01BED, 0x01BED), (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33),
    (0x01C36, 0x01C37), (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0),
    (0x01CE2, 0x01CE8), (0x01CED, 0x01CED), (0x01CF4, 0x01CF4),
    (0x01CF8, 0x01CF9), (0x01DC0, 0x01DCA), (0x01DF6, 0x01DF9),
    (0x01DFE, 0x01DFF), (0x0200B, 0x0200F), (0x0202A, 0x0202E),
    (0x02060, 0x02063), (0x0206A, 0x0206F), (0x020D0, 0x020EB),
    (0x0302A, 0x0302F), (0x03099, 0x0309A), (0x0A806, 0x0A806),
    (0x0A80B, 0x0A80B), (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4),
    (0x0A8E0, 0x0A8F1), (0x0A926, 0x0A92D), (0x0A947, 0x0A951),
    (0x0A980, 0x0A982), (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC),
    (0x0AAB0, 0x0AAB0), (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF),
    (0x0AAC1, 0x0AAC1), (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F),
    (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB),
    (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F),
    (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F), (0x10D24, 0x10D27),
    (0x10EAB, 0x10EAC), (0x10EFD, 0x10EFF), (0x10F46, 0x10F50),
    (0x10F82, 0x10F85), (0x11070, 0x11070), (0x11080, 0x11081),
    (0x110B3, 0x110B6), (0x110B9, 0x110BA), (0x110C2, 0x110C2),
    (0x110CD, 0x110CD), (0x11100, 0x11102), (0x11127, 0x1112B),
    (0x1112D, 0x11134), (0x11145, 0x11146), (0x11180, 0x11181),
    (0x111B6, 0x111BE), (0x111CF, 0x111CF), (0x11241, 0x11241),
    (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11301, 0x11301),
    (0x1133B, 0x1133C), (0x11340, 0x11340), (0x11366, 0x1136C),
    (0x11370, 0x11374), (0x11438, 0x1143F), (0x11442, 0x11444),
    (0x11446, 0x11446), (0x1145E, 0x1145E), (0x114B3, 0x114B8),
    (0x114BA, 0x114BA), (0x114BF, 0x114C0), (0x114C2, 0x114C3),
    (0x115B2, 0x115B5), (0x115BC, 0x115BD), (0x115BF, 0x115C0),
    (0x11633, 0x1163A), (0x1163D, 0x1163D), (0x1163F, 0x11640),
    (0x116AB, 0x116AB), (0x116AD, 0x116AD), (0x116B0, 0x116B7),
    (0x1171D, 0x1171F), (0x11722, 0x11725), (0x11727, 0x1172B),
    (0x1193B, 0x1193C), (0x1193E, 0x1193E), (0x11943, 0x11943),
    (0x119D4, 0x119D7), (0x119DA, 0x119DB), (0x119E0, 0x119E0),
    (0x11A01, 0x11A06), (0x11A09, 0x11A0A), (0x11A33, 0x11A38),
    (0x11A3B, 0x11A3E), (0x11A47, 0x11A47), (0x11A51, 0x11A56),
    (0x11A59, 0x11A5B), (0x11A84, 0x11A96), (0x11A98, 0x11A99),
    (0x11C30, 0x11C36), (0x11C38, 0x11C3D), (0x11C3F, 0x11C3F),
    (0x11C92, 0x11CA7), (0x11CAA, 0x11CB0), (0x11CB2, 0x11CB3),
    (0x11CB5, 0x11CB6), (0x11D31, 0x11D36), (0x11D3A, 0x11D3A),
    (0x11D3C, 0x11D3D), (0x11D3F, 0x11D45), (0x11D47, 0x11D47),
    (0x11D90, 0x11D91), (0x11D95, 0x11D95), (0x11D97, 0x11D97),
    (0x11EF3, 0x11EF4), (0x11F00, 0x11F01), (0x11F36, 0x11F3A),
    (0x11F40, 0x11F40), (0x11F42, 0x11F42), (0x13430, 0x13438),
    (0x16AF0, 0x16AF4), (0x16B30, 0x16B36), (0x16F4F, 0x16F4F),
    (0x16F8F, 0x16F92), (0x16FE4, 0x16FE4), (0x1BC9D, 0x1BC9E),
    (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1D800, 0x1DA36),
    (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84),
    (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF), (0x1E000, 0x1E006),
    (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024),
    (0x1E026, 0x1E02A), (0x1E08F, 0x1E08F), (0x1E130, 0x1E136),
    (0x1E290, 0x1E2AE), (0x1E2EC, 0x1E2EF), (0x1E4EC, 0x1E4EF),
    (0x1E8D0, 0x1E8D6), (0x1E944, 0x1E94A), (0xE0001, 0xE0001),
    (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];

/// Unicode 16.0.0 (306 ranges).
pub static ZERO_WIDTH_16_0_0: &[(u32, u32)] = &[
    (0x00300, 0x0036F), (0x00483, 0x00486), (0x00488, 0x00489),
    (0x00591, 0x005BD), (0x005BF, 0x005BF), (0x005C1, 0x005C2),
    (0x005C4, 0x005C5), (0x005C7, 0x005C7), (0x00604, 0x00604),
    (0x00610, 0x0061A), (0x0064B, 0x0065F), (0x00670, 0x00670),
    (0x006D6, 0x006E4), (0x006E7, 0x006E8), (0x006EA, 0x006ED),
    (0x00711, 0x00711), (0x00730, 0x0074A), (0x007A6, 0x007B0),
    (0x007EB, 0x007F3), (0x007FD, 0x007FD), (0x00859, 0x0085B),
    (0x00897, 0x00897), (0x008BE, 0x008FE), (0x00900, 0x00902),
    (0x0093A, 0x0093A), (0x0093C, 0x0093C), (0x00941, 0x00948),
    (0x0094D, 0x0094D), (0x00951, 0x00955), (0x00962, 0x00963),
    (0x00981, 0x00981), (0x009BC, 0x009BC), (0x009C1, 0x009C4),
    (0x009CD, 0x009CD), (0x009E2, 0x009E3), (0x00A01, 0x00A02),
    (0x00A3C, 0x00A3C), (0x00A41, 0x00A42), (0x00A47, 0x00A48),
    (0x00A4B, 0x00A4D), (0x00A51, 0x00A51), (0x00A70, 0x00A71),
    (0x00A75, 0x00A75), (0x00A81, 0x00A82), (0x00ABC, 0x00ABC),
    (0x00AC1, 0x00AC5), (0x00AC7, 0x00AC8), (0x00ACD, 0x00ACD),
    (0x00AE2, 0x00AE3), (0x00B01, 0x00B01), (0x00B3C, 0x00B3C),
    (0x00B3F, 0x00B3F), (0x00B41, 0x00B44), (0x00B4D, 0x00B4D),
    (0x00B55, 0x00B56), (0x00B62, 0x00B63), (0x00B82, 0x00B82),
    (0x00BC0, 0x00BC0), (0x00BCD, 0x00BCD), (0x00C3C, 0x00C3C),
    (0x00C3E, 0x00C40), (0x00C46, 0x00C48), (0x00C4A, 0x00C4D),
    (0x00C55, 0x00C56), (0x00C62, 0x00C63), (0x00CBC, 0x00CBC),
    (0x00CBF, 0x00CBF), (0x00CC6, 0x00CC6), (0x00CCC, 0x00CCD),
    (0x00D00, 0x00D00), (0x00D3B, 0x00D3C), (0x00D41, 0x00D43),
    (0x00D4D, 0x00D4D), (0x00D62, 0x00D63), (0x00D81, 0x00D81),
    (0x00DCA, 0x00DCA), (0x00DD2, 0x00DD4), (0x00DD6, 0x00DD6),
    (0x00E31, 0x00E31), (0x00E34, 0x00E3A), (0x00E47, 0x00E4E),
    (0x00EB1, 0x00EB1), (0x00EB4, 0x00EBC), (0x00EC8, 0x00ECD),
    (0x00F18, 0x00F19), (0x00F35, 0x00F35), (0x00F37, 0x00F37),
    (0x00F39, 0x00F39), (0x00F71, 0x00F7E), (0x00F80, 0x00F84),
    (0x00F86, 0x00F87), (0x00F8D, 0x00F97), (0x00F99, 0x00FBC),
    (0x00FC6, 0x00FC6), (0x0102D, 0x01030), (0x01032, 0x01032),
    (0x01036, 0x01037), (0x01039, 0x01039), (0x01058, 0x01059),
    (0x01160, 0x011FF), (0x0135D, 0x0135F), (0x01712, 0x01714),
    (0x01732, 0x01734), (0x01752, 0x01753), (0x01772, 0x01773),
    (0x017B4, 0x017B5), (0x017B7, 0x017BD), (0x017C6, 0x017C6),
    (0x017C9, 0x017D3), (0x017DD, 0x017DD), (0x0180B, 0x0180D),
    (0x018A9, 0x018A9), (0x01920, 0x01922), (0x01927, 0x01928),
    (0x01932, 0x01932), (0x01939, 0x0193B), (0x01A17, 0x01A18),
    (0x01A56, 0x01A56), (0x01A58, 0x01A5E), (0x01A60, 0x01A60),
    (0x01A62, 0x01A62), (0x01A65, 0x01A6C), (0x01A73, 0x01A7C),
    (0x01A7F, 0x01A7F), (0x01AB0, 0x01ABD), (0x01ABF, 0x01ACE),
    (0x01B00, 0x01B03), (0x01B34, 0x01B34), (0x01B36, 0x01B3A),
    (0x01B3C, 0x01B3C), (0x01B42, 0x01B42), (0x01B6B, 0x01B73),
    (0x01B80, 0x01B81), (0x01BA2, 0x01BA5), (0x01BA8, 0x01BA9),
    (0x01BAB, 0x01BAB), (0x01BE6, 0x01BE6), (0x01BE8, 0x01BE9),
    (0x01BED, 0x01BED), (0x01BEF, 0x01BF1), (0x01C2C, 0x01C33),
    (0x01C36, 0x01C37), (0x01CD0, 0x01CD2), (0x01CD4, 0x01CE0),
    (0x01CE2, 0x01CE8), (0x01CED, 0x01CED), (0x01CF4, 0x01CF4),
    (0x01CF8, 0x01CF9), (0x01DC0, 0x01DCA), (0x01DF6, 0x01DF9),
    (0x01DFE, 0x01DFF), (0x0200B, 0x0200F), (0x0202A, 0x0202E),
    (0x02060, 0x02063), (0x0206A, 0x0206F), (0x020D0, 0x020EB),
    (0x0302A, 0x0302F), (0x03099, 0x0309A), (0x0A806, 0x0A806),
    (0x0A80B, 0x0A80B), (0x0A825, 0x0A826), (0x0A8C4, 0x0A8C4),
    (0x0A8E0, 0x0A8F1), (0x0A926, 0x0A92D), (0x0A947, 0x0A951),
    (0x0A980, 0x0A982), (0x0A9B3, 0x0A9B9), (0x0A9BC, 0x0A9BC),
    (0x0AAB0, 0x0AAB0), (0x0AAB2, 0x0AAB8), (0x0AABE, 0x0AABF),
    (0x0AAC1, 0x0AAC1), (0x0FB1E, 0x0FB1E), (0x0FE00, 0x0FE0F),
    (0x0FE20, 0x0FE23), (0x0FEFF, 0x0FEFF), (0x0FFF9, 0x0FFFB),
    (0x10A01, 0x10A03), (0x10A05, 0x10A06), (0x10A0C, 0x10A0F),
    (0x10A38, 0x10A3A), (0x10A3F, 0x10A3F), (0x10D24, 0x10D27),
    (0x10EAB, 0x10EAC), (0x10EFD, 0x10EFF), (0x10F46, 0x10F50),
    (0x10F82, 0x10F85), (0x11070, 0x11070), (0x11080, 0x11081),
    (0x110B3, 0x110B6), (0x110B9, 0x110BA), (0x110C2, 0x110C2),
    (0x110CD, 0x110CD), (0x11100, 0x11102), (0x11127, 0x1112B),
    (0x1112D, 0x11134), (0x11145, 0x11146), (0x11180, 0x11181),
    (0x111B6, 0x111BE), (0x111CF, 0x111CF), (0x11241, 0x11241),
    (0x112DF, 0x112DF), (0x112E3, 0x112EA), (0x11301, 0x11301),
    (0x1133B, 0x1133C), (0x11340, 0x11340), (0x11366, 0x1136C),
    (0x11370, 0x11374), (0x113BB, 0x113C0), (0x113CE, 0x113CE),
    (0x113D0, 0x113D0), (0x113D2, 0x113D2), (0x113E1, 0x113E2),
    (0x11438, 0x1143F), (0x11442, 0x11444), (0x11446, 0x11446),
    (0x1145E, 0x1145E), (0x114B3, 0x114B8), (0x114BA, 0x114BA),
    (0x114BF, 0x114C0), (0x114C2, 0x114C3), (0x115B2, 0x115B5),
    (0x115BC, 0x115BD), (0x115BF, 0x115C0), (0x11633, 0x1163A),
    (0x1163D, 0x1163D), (0x1163F, 0x11640), (0x116AB, 0x116AB),
    (0x116AD, 0x116AD), (0x116B0, 0x116B7), (0x1171D, 0x1171F),
    (0x11722, 0x11725), (0x11727, 0x1172B), (0x1193B, 0x1193C),
    (0x1193E, 0x1193E), (0x11943, 0x11943), (0x119D4, 0x119D7),
    (0x119DA, 0x119DB), (0x119E0, 0x119E0), (0x11A01, 0x11A06),
    (0x11A09, 0x11A0A), (0x11A33, 0x11A38), (0x11A3B, 0x11A3E),
    (0x11A47, 0x11A47), (0x11A51, 0x11A56), (0x11A59, 0x11A5B),
    (0x11A84, 0x11A96), (0x11A98, 0x11A99), (0x11C30, 0x11C36),
    (0x11C38, 0x11C3D), (0x11C3F, 0x11C3F), (0x11C92, 0x11CA7),
    (0x11CAA, 0x11CB0), (0x11CB2, 0x11CB3), (0x11CB5, 0x11CB6),
    (0x11D31, 0x11D36), (0x11D3A, 0x11D3A), (0x11D3C, 0x11D3D),
    (0x11D3F, 0x11D45), (0x11D47, 0x11D47), (0x11D90, 0x11D91),
    (0x11D95, 0x11D95), (0x11D97, 0x11D97), (0x11EF3, 0x11EF4),
    (0x11F00, 0x11F01), (0x11F36, 0x11F3A), (0x11F40, 0x11F40),
    (0x11F42, 0x11F42), (0x13430, 0x13438), (0x1611E, 0x16129),
    (0x1612D, 0x1612F), (0x16AF0, 0x16AF4), (0x16B30, 0x16B36),
    (0x16D40, 0x16D41), (0x16D6B, 0x16D6C), (0x16F4F, 0x16F4F),
    (0x16F8F, 0x16F92), (0x16FE4, 0x16FE4), (0x1BC9D, 0x1BC9E),
    (0x1D167, 0x1D169), (0x1D173, 0x1D182), (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD), (0x1D242, 0x1D244), (0x1D800, 0x1DA36),
    (0x1DA3B, 0x1DA6C), (0x1DA75, 0x1DA75), (0x1DA84, 0x1DA84),
    (0x1DA9B, 0x1DA9F), (0x1DAA1, 0x1DAAF), (0x1E000, 0x1E006),
    (0x1E008, 0x1E018), (0x1E01B, 0x1E021), (0x1E023, 0x1E024),
    (0x1E026, 0x1E02A), (0x1E08F, 0x1E08F), (0x1E130, 0x1E136),
    (0x1E290, 0x1E2AE), (0x1E2EC, 0x1E2EF), (0x1E4EC, 0x1E4EF),
    (0x1E5EE, 0x1E5EF), (0x1E8D0, 0x1E8D6), (0x1E944, 0x1E94A),
    (0xE0001, 0xE0001), (0xE0020, 0xE007F), (0xE0100, 0xE01EF),
];
