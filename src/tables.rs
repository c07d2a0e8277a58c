// Generated by gen-tables; do not edit.
//
// Log and exp tables for GF(2^16) under the irreducible polynomial
// x^16 + x^12 + x^3 + x + 1 (0x100B) with multiplicative generator 257.

/// LOG_TABLE[v] is the exponent e such that 257^e = v. The entry for zero
/// is never read on any path whose output survives masking.
pub(crate) static LOG_TABLE: [u16; 65536] = [
    0x0000, 0xffff, 0xaffd, 0x2000, 0x5ffb, 0x4000, 0xcffd, 0xe221, 0x0ff9, 0x0222, 0xeffd, 0xbfe4, 0x7ffb, 0xd88a, 0x921f, 0x6000,
    0xbff6, 0x8000, 0xb21f, 0x0381, 0x9ffb, 0xc443, 0x6fe2, 0xf88a, 0x2ff9, 0x7bff, 0x8888, 0x2222, 0x421d, 0xdfe4, 0x0ffe, 0x9f12,
    0x6ff4, 0xbf12, 0x2ffe, 0xbaac, 0x621d, 0x481a, 0xb37e, 0xffe4, 0x4ff9, 0x8c4c, 0x7441, 0x9bff, 0x1fe0, 0x4222, 0xa888, 0x1d90,
    0xdff6, 0xa206, 0x2bfd, 0xa000, 0x3886, 0x2381, 0xd21f, 0xed73, 0xf21a, 0x188b, 0x8fe2, 0x9de0, 0xbffb, 0xf0df, 0x4f10, 0xe443,
    0x1ff2, 0x0444, 0x6f10, 0xa6c6, 0xdffb, 0x7fc9, 0x6aaa, 0x10e0, 0x121b, 0xa0b5, 0xf817, 0x388b, 0x637c, 0xbde0, 0xafe2, 0x5e21,
    0xfff6, 0xb115, 0x3c4a, 0xc206, 0x243f, 0xc000, 0x4bfd, 0xc874, 0xcfdd, 0x0d74, 0xf21f, 0x4404, 0x5886, 0x8134, 0xcd8d, 0x4381,
    0x8ff4, 0x7f8b, 0x5204, 0xdf12, 0xdbfa, 0xdaac, 0x4ffe, 0xeb37, 0xe883, 0x1fe5, 0xd37e, 0xa665, 0x821d, 0xb62f, 0x9d71, 0x681a,
    0xa218, 0x3d90, 0xc888, 0x7566, 0x3fe0, 0x75cf, 0x4dde, 0x6222, 0x6ff9, 0xe5a2, 0xa0dd, 0xac4c, 0xff0d, 0xbbff, 0x9441, 0x986f,
    0xcfef, 0xb86f, 0xb441, 0x32d1, 0x1f0e, 0xcf95, 0x56c4, 0xdbff, 0x8ff9, 0x0525, 0x2fc7, 0x05a3, 0x1aa8, 0xcc4c, 0xc0dd, 0x8f66,
    0xc218, 0x6e0a, 0x50b3, 0x5d90, 0xa815, 0x9566, 0xe888, 0x8428, 0x137a, 0x8222, 0x6dde, 0x779d, 0x5fe0, 0x2ce2, 0x0e1f, 0x95cf,
    0xaff4, 0x8002, 0x6113, 0x9f8b, 0xec47, 0xff12, 0x7204, 0xf1c2, 0xd43c, 0x0b38, 0x6ffe, 0xd105, 0xfbfa, 0xc365, 0x7872, 0xfaac,
    0x7fdb, 0x881a, 0xbd71, 0xd301, 0xa21d, 0x548a, 0xf401, 0xd62f, 0x0884, 0x3c2b, 0x3132, 0x3fe5, 0x7d8b, 0xc665, 0xf37e, 0xcb61,
    0x3ff2, 0xa90f, 0x2f89, 0x2444, 0x0202, 0xc6c6, 0x8f10, 0xdc0b, 0x8bf8, 0x30e0, 0x8aaa, 0x99b1, 0xfffb, 0xffb1, 0x9b35, 0x9fc9,
    0x9881, 0x7e21, 0xcfe2, 0xa6fe, 0x837c, 0xc642, 0x5663, 0xdde0, 0x321b, 0x5ef7, 0x662d, 0xc0b5, 0x4d6f, 0x588b, 0x1818, 0x6e6e,
    0x5216, 0x6381, 0xed8d, 0x3be4, 0x7886, 0xb0a3, 0x2564, 0xa134, 0xefdd, 0x9cce, 0x25cd, 0x2d74, 0xfddb, 0x6404, 0x1220, 0xfbdd,
    0x1ff7, 0x96be, 0x95a0, 0xd115, 0x50db, 0xe206, 0x5c4a, 0x68b8, 0xaf0b, 0xe874, 0x6bfd, 0x2a3c, 0x443f, 0x625f, 0x486d, 0xe000,
    0x7fed, 0x0001, 0x686d, 0x9851, 0x643f, 0x0702, 0xe2ce, 0x825f, 0xcf0b, 0xdd74, 0x7f93, 0x0875, 0x06c2, 0x4a3c, 0x8bfd, 0x766b,
    0x3ff7, 0x8887, 0xb522, 0xb6be, 0xdfc4, 0xf115, 0xb5a0, 0x1b12, 0xcaa5, 0x88b8, 0x7c4a, 0x3ff8, 0x70db, 0xe58a, 0x3f64, 0x0207,
    0x7216, 0xc96a, 0x1e08, 0x8381, 0x00b1, 0x5be4, 0x0d8e, 0x61ad, 0x5813, 0xc134, 0x4564, 0x1287, 0x9886, 0x1f2c, 0x3426, 0xd0a3,
    0xc377, 0x1bde, 0x3220, 0x4c31, 0x1ddc, 0xcd59, 0x279b, 0x8404, 0x0fde, 0x92d8, 0xdcdf, 0xbcce, 0xbe1c, 0x4d74, 0x45cd, 0x5eab,
    0x5ff2, 0xf7fe, 0x3000, 0xc90f, 0x1111, 0x4444, 0x4f89, 0x07ff, 0x9c45, 0xfc0b, 0xaf10, 0x57f1, 0x2202, 0xf90f, 0xa1c0, 0xe6c6,
    0x843a, 0xbfc9, 0xbb35, 0xc5fe, 0x1ffc, 0x3e25, 0x8103, 0x1fb2, 0xabf8, 0x5788, 0x7363, 0x50e0, 0x2870, 0xb9b1, 0xaaaa, 0x5555,
    0x2fd9, 0x8e6e, 0x3818, 0xe081, 0x6d6f, 0xfd9a, 0x82ff, 0x788b, 0x521b, 0x3800, 0x0488, 0x7ef7, 0xa3ff, 0xe0b5, 0x862d, 0xc7c4,
    0xb881, 0xd436, 0xec28, 0x9e21, 0xe12f, 0xc6fe, 0xefe2, 0x9167, 0x2d89, 0xfde0, 0x7663, 0x7ad0, 0xa37c, 0x7a91, 0x7b5f, 0xe642,
    0xefef, 0x2626, 0x590d, 0xd86f, 0xdf86, 0x52d1, 0xd441, 0xbb17, 0xb1ff, 0xfbff, 0x76c4, 0x9d48, 0x3f0e, 0x296c, 0x8c09, 0xef95,
    0x3bf6, 0xaf66, 0xe0dd, 0x6356, 0x3aa8, 0x5dc5, 0x49af, 0xec4c, 0xaff9, 0x20a5, 0xafaf, 0x2525, 0x4b33, 0x25a3, 0x4fc7, 0xaaeb,
    0x487f, 0xb5cf, 0x2e1f, 0x9f28, 0x7fe0, 0xaa96, 0x56fc, 0x4ce2, 0x337a, 0x2a39, 0x7640, 0xa222, 0x0661, 0x979d, 0x8dde, 0xb0c4,
    0xe218, 0x8e04, 0x0ef5, 0x8e0a, 0x162b, 0x7d90, 0x70b3, 0x9337, 0xfd6c, 0xa428, 0x0889, 0x7f80, 0xc815, 0x4948, 0x1e6c, 0xb566,
    0x0214, 0xeb61, 0x137f, 0x57c4, 0x9d8b, 0x64d7, 0xebe1, 0xe665, 0x2884, 0x88e8, 0x60a1, 0x5c2b, 0xd561, 0x5fe5, 0x5132, 0x3678,
    0x9fdb, 0xa293, 0x4ccc, 0xa81a, 0xd5ca, 0xf301, 0xdd71, 0xa15d, 0xadd9, 0xf62f, 0x1402, 0x61eb, 0xc21d, 0x5ca6, 0xabdb, 0x748a,
    0xcff4, 0xad58, 0x46bc, 0xa002, 0x459e, 0xbf8b, 0x8113, 0x8ab5, 0x00d9, 0x11c3, 0x9204, 0xf61a, 0x0c48, 0x4043, 0x18b6, 0x1f13,
    0x5f09, 0x1aad, 0x9872, 0x65b7, 0x1bfb, 0x84bf, 0xda39, 0xe365, 0xf43c, 0x1510, 0x125d, 0x2b38, 0xf86a, 0xf105, 0x8ffe, 0x82d7,
    0x2feb, 0xa2d7, 0xaffe, 0xd35c, 0x186b, 0x6cdf, 0x484f, 0x1106, 0x143d, 0x4e5a, 0xb6ff, 0x3510, 0x92cc, 0x4b38, 0x325d, 0x4119,
    0x7f09, 0xf637, 0x8d72, 0x3aad, 0x2f91, 0x85b7, 0xb872, 0x613c, 0xb6bf, 0x0366, 0xfa39, 0x1c97, 0x3bfb, 0x5090, 0x2669, 0xa4bf,
    0xeff4, 0x35b3, 0x3885, 0xcd58, 0x6520, 0xc002, 0x66bc, 0x4df1, 0x8fc2, 0xaab5, 0xa113, 0xa864, 0x659e, 0x116e, 0xcb0f, 0xdf8b,
    0x7aa3, 0x3f13, 0x38b6, 0xe8f0, 0x2c48, 0x03e9, 0xeff5, 0x6043, 0x20d9, 0x8920, 0x9588, 0x31c3, 0xef61, 0x161b, 0xb204, 0x4b9b,
    0x2214, 0x8859, 0x7968, 0x0b62, 0xce05, 0x77c4, 0x337f, 0x8b31, 0xb0ae, 0x0666, 0x0be2, 0xd5f0, 0xbd8b, 0x8c86, 0x11ab, 0x84d7,
    0x0811, 0x5678, 0x7132, 0x19e0, 0xf561, 0xbe2d, 0xc284, 0x7fe5, 0x4884, 0xe53d, 0xcf29, 0xa8e8, 0xe423, 0x7c2b, 0x80a1, 0x22f7,
    0x7375, 0x948a, 0xcbdb, 0xe1d3, 0xe21d, 0x2f4d, 0xfc2e, 0x7ca6, 0xcdd9, 0x5a7e, 0x7d57, 0x1630, 0xd798, 0x81eb, 0x3402, 0xb8b7,
    0xbfdb, 0x7bd3, 0x42d6, 0xc293, 0x8cdd, 0xc81a, 0x6ccc, 0xa05f, 0x6e1a, 0xc15d, 0xfd71, 0x70fa, 0xf5ca, 0x5297, 0x0ea9, 0x1302,
    0x0ff0, 0x2111, 0xa7fc, 0x4626, 0xdffd, 0xf86f, 0x790d, 0x8c45, 0xc10e, 0xdb17, 0xf441, 0x8ff2, 0xff86, 0xddff, 0xb7fc, 0x72d1,
    0x4c43, 0x0f96, 0xac09, 0x609a, 0x5f0e, 0x26ba, 0x07ef, 0x496c, 0xd1ff, 0xf05a, 0xa90d, 0x1c00, 0x51be, 0xbd48, 0x96c4, 0x7ef0,
    0x3438, 0xcaeb, 0x6fc7, 0xfcd8, 0x6b33, 0x4bc4, 0x75fc, 0x45a3, 0xcff9, 0x1e06, 0xee22, 0x40a5, 0x3101, 0x4525, 0xcfaf, 0x1c88,
    0x5bf6, 0x8eba, 0x0786, 0xcf66, 0x2361, 0x8356, 0x00de, 0x451e, 0xd86d, 0x0c4d, 0x69af, 0x92c5, 0x5aa8, 0x645c, 0x0553, 0x7dc5,
    0xdfd6, 0xd566, 0x3e6c, 0xc3c2, 0xe815, 0x4ada, 0x907f, 0x6948, 0x1d6d, 0x3cf3, 0xad98, 0xc428, 0x32fd, 0x9f80, 0x2889, 0x9c24,
    0x0219, 0xc5af, 0xe7fd, 0xae04, 0xb485, 0xae0a, 0x2ef5, 0x78e0, 0x53fd, 0xb337, 0x90b3, 0x4b56, 0x362b, 0x66ab, 0x77c2, 0x9d90,
    0x687f, 0x0c5e, 0x8434, 0xd5cf, 0x9c26, 0xbf28, 0x4e1f, 0x3fae, 0x912d, 0x6ce2, 0x76fc, 0x8fcd, 0x9fe0, 0x5816, 0x4165, 0xca96,
    0xdd86, 0xd0c4, 0xadde, 0x4481, 0x2661, 0x6497, 0x2ace, 0xb79d, 0x537a, 0x7aff, 0x2a8f, 0x4a39, 0x2b5d, 0xc222, 0x9640, 0x6973,
    0x9fed, 0x0a45, 0xd623, 0x2001, 0x090b, 0xb851, 0x886d, 0x2b5f, 0x8f84, 0xa25f, 0x02cf, 0x36ac, 0x843f, 0x354b, 0x6b15, 0x2702,
    0x61fd, 0x966b, 0xabfd, 0x2f0a, 0x26c2, 0x173f, 0x4d46, 0x6a3c, 0xef0b, 0xb523, 0xd969, 0xfd74, 0x3c07, 0x2875, 0x9f93, 0x1fb5,
    0xebf3, 0x2207, 0x5f64, 0x13cc, 0x90db, 0x7940, 0x1354, 0x058b, 0xeaa5, 0xf0f4, 0x0dc3, 0xa8b8, 0xf9ac, 0x5ff8, 0x9c4a, 0x1e4d,
    0x5ff7, 0x659d, 0xd0a2, 0xa887, 0x5fad, 0xd6be, 0xd522, 0x35b4, 0xfb30, 0x3b12, 0xd5a0, 0xd848, 0xffc4, 0xad83, 0x5ae9, 0x1116,
    0xf87c, 0x7eab, 0x65cd, 0xa587, 0xde1c, 0xbca2, 0x4f26, 0x6d74, 0x2fde, 0x239e, 0x5a94, 0xb2d8, 0x06fa, 0xdcce, 0xfcdf, 0x0ba2,
    0xe377, 0xb327, 0xda36, 0x3bde, 0x263e, 0x6c31, 0x5220, 0x7f51, 0xb65e, 0xa404, 0x479b, 0x49e9, 0x3ddc, 0xc419, 0x60c2, 0xed59,
    0x9216, 0x7eca, 0x3e02, 0xe96a, 0xbef2, 0xa381, 0x3e08, 0x6224, 0xc628, 0x81ad, 0x2d8e, 0x3c3a, 0x20b1, 0xa40f, 0x4335, 0x7be4,
    0xad6a, 0xf0a3, 0x5426, 0xe323, 0xb886, 0xd3e4, 0x2f7e, 0x3f2c, 0x7813, 0x5854, 0xf945, 0xe134, 0xce69, 0x3287, 0x6564, 0x1f58,
    0xb211, 0x0643, 0x9b5f, 0xe72c, 0xc37c, 0xa20c, 0x07c2, 0x9a91, 0x4d89, 0x14f3, 0x14d5, 0x1de1, 0x9bdf, 0x9ad0, 0x9663, 0x08c9,
    0xd881, 0xab1c, 0x38e6, 0xf436, 0x109f, 0xbe21, 0x0c29, 0xf460, 0x855f, 0xb167, 0x0fe3, 0xb1b7, 0x0130, 0x89a0, 0xe675, 0xe6fe,
    0x4fd9, 0xd242, 0x5291, 0xae6e, 0xfcc9, 0x0082, 0x5818, 0x998f, 0x85c8, 0x988b, 0xa2ff, 0x3f70, 0x8d6f, 0x7188, 0x515b, 0x1d9b,
    0x5dd7, 0xe7c4, 0xa62d, 0xa0ff, 0xc3ff, 0x1a16, 0x11e9, 0x00b6, 0x721b, 0x0f28, 0x0ca4, 0x5800, 0x5bd9, 0x9ef7, 0x2488, 0xe746,
    0x7ff2, 0x59bf, 0x5d56, 0x17ff, 0xf6b9, 0xe90f, 0x5000, 0x95fe, 0xf59b, 0x27ff, 0x6f89, 0x2902, 0x3111, 0x26ef, 0x3ab3, 0x6444,
    0xb0d6, 0x06c7, 0xc1c0, 0x0f04, 0x4202, 0x93cd, 0xa618, 0x1910, 0xbc45, 0xc17f, 0xf040, 0x1c0c, 0xc8b3, 0x77f1, 0xcf10, 0x7614,
    0x0f07, 0x7555, 0xcaaa, 0xd31a, 0x4870, 0x664a, 0x15b5, 0xd9b1, 0xcbf8, 0x4c77, 0x34bd, 0x7788, 0x8a37, 0x70e0, 0x9363, 0x1c8f,
    0xa43a, 0x084c, 0xc50d, 0xdfc9, 0xc25a, 0xe5fe, 0xdb35, 0x502c, 0xa868, 0x3fb2, 0xa103, 0x1f5c, 0x3ffc, 0xa161, 0x32d5, 0x5e25,
    0xdfe8, 0x7e25, 0x52d5, 0xfc0f, 0x5ffc, 0x7559, 0x835a, 0xc161, 0xc868, 0xd8bb, 0x1cdd, 0x5fb2, 0xf84c, 0x3f5c, 0xc103, 0x7030,
    0xc43a, 0x9034, 0xfe57, 0x284c, 0x66fd, 0xffc9, 0xe50d, 0x7026, 0x42ca, 0x702c, 0xfb35, 0xdade, 0xe25a, 0xdf9a, 0xf116, 0x05ff,
    0x2f07, 0x61a2, 0xa635, 0x9555, 0x3d70, 0xf31a, 0xeaaa, 0x1e0e, 0xdf8e, 0xf9b1, 0x35b5, 0xd468, 0x6870, 0x95d7, 0x113a, 0x864a,
    0x66bd, 0x3c8f, 0xb363, 0x2b6a, 0xaa37, 0xf133, 0xcc94, 0x90e0, 0xebf8, 0x8b46, 0x008e, 0x6c77, 0xd666, 0x9788, 0x54bd, 0x1e9e,
    0x9ff2, 0x1899, 0xe5b0, 0x79bf, 0xe882, 0x37ff, 0x7d56, 0x3c39, 0x151e, 0xb5fe, 0x7000, 0xa436, 0x16ba, 0x92e6, 0xfdee, 0x0910,
    0x3fc0, 0x8444, 0x5ab3, 0x0f36, 0x5111, 0x3b20, 0x5862, 0x46ef, 0x159c, 0x892e, 0xc16b, 0x47ff, 0x7b0d, 0x4902, 0x8f89, 0x0c5b,
    0x2aa1, 0x9614, 0xef10, 0x697a, 0xe8b3, 0xb715, 0x98ee, 0x97f1, 0xdc45, 0x814a, 0xb3e6, 0xe17f, 0x9ff3, 0x3c0c, 0x1041, 0xa82e,
    0xd0d6, 0x8b54, 0x391e, 0x26c7, 0x4586, 0x2f04, 0xe1c0, 0x146f, 0x9f5f, 0x3910, 0xc618, 0x8cb8, 0x6202, 0x8a4a, 0xfb98, 0xb3cd,
    0xd211, 0xd29e, 0x3857, 0x2643, 0x2966, 0x072d, 0xbb5f, 0x0848, 0x7e03, 0xba91, 0x27c2, 0x7aa5, 0xe37c, 0xf1ce, 0x3b2f, 0xc20c,
    0x60ac, 0x28c9, 0xb663, 0x4143, 0xbbdf, 0x9d39, 0x85ee, 0xbad0, 0x6d89, 0x3db8, 0x3c84, 0x34f3, 0xc1a8, 0x3de1, 0x34d5, 0x834a,
    0xb80e, 0x06ff, 0x0676, 0x0b8e, 0x2130, 0x90ea, 0xc9dd, 0xa9a0, 0xa55f, 0xfa64, 0x6e2b, 0xd167, 0x7282, 0xd1b7, 0x2fe3, 0x31dd,
    0xf881, 0x7f6a, 0x953b, 0xcb1c, 0x7f27, 0x1437, 0x58e6, 0xa9dc, 0x9421, 0x1461, 0x2c29, 0x5542, 0x309f, 0x6f49, 0xd2f4, 0xde21,
    0x2373, 0x0747, 0x4488, 0xde53, 0x7bd9, 0xb762, 0x91d1, 0xbef7, 0x921b, 0xe9f4, 0xdf4a, 0x2f28, 0xac2c, 0x7800, 0x2ca4, 0x02c7,
    0x7dd7, 0xb1a7, 0x0a7c, 0x07c5, 0x2d55, 0xc0ff, 0xc62d, 0xd108, 0x8796, 0x20b6, 0x31e9, 0xf165, 0xe3ff, 0x8d0d, 0x68b5, 0x3a16,
    0x6fd9, 0x3aea, 0x2bd1, 0xf242, 0xf2d3, 0xce6e, 0x7291, 0xb7b5, 0x3cdb, 0xb98f, 0x7818, 0x3fe7, 0x1cca, 0xa739, 0x505d, 0x2082,
    0x1e18, 0x3d9b, 0x715b, 0x8b3e, 0xad6f, 0xaa47, 0x20f8, 0x9188, 0xa5c8, 0x4578, 0x0295, 0xb88b, 0xbea6, 0x5f70, 0xc2ff, 0x67cd,
    0xbfed, 0x440d, 0xd10e, 0x2a45, 0x57fa, 0x4001, 0xf623, 0x7f89, 0x8ffb, 0x4b5f, 0xa86d, 0x7103, 0x290b, 0xb1c0, 0x3c43, 0xd851,
    0x710c, 0x4702, 0x8b15, 0x3ec8, 0xa43f, 0xdae7, 0x3ff0, 0x554b, 0xaf84, 0x8d56, 0x8dfd, 0xc25f, 0x67fa, 0x56ac, 0x22cf, 0xdfc5,
    0xfc40, 0x3fb5, 0xbf93, 0x8a1b, 0x5c07, 0x837f, 0x1098, 0x4875, 0x0f0c, 0x9ecd, 0xd6b7, 0xd523, 0xb7ec, 0x1d75, 0xf969, 0x6737,
    0x81fd, 0x4df2, 0xa058, 0xb66b, 0x590b, 0x4f0a, 0xcbfd, 0x84b5, 0x01bc, 0x8a3c, 0x6d46, 0x2def, 0x46c2, 0x06ad, 0x2eee, 0x373f,
    0xe435, 0x3116, 0x7ae9, 0xbf26, 0x1fc5, 0x3bc1, 0xacd6, 0xcd83, 0x1b31, 0x39e6, 0xfbc1, 0x5b12, 0x25fa, 0xf848, 0xf5a0, 0xecc6,
    0x7ff7, 0xe1bf, 0xce03, 0x859d, 0x9e20, 0xc887, 0xf0a2, 0xbfda, 0xe0fe, 0x55b4, 0xf522, 0x46f9, 0x7fad, 0x4785, 0xcc85, 0xf6be,
    0x0bf4, 0x998d, 0x3eb8, 0x4207, 0xb783, 0x33cc, 0x7f64, 0x50d1, 0xd35e, 0x258b, 0x3354, 0xbe47, 0xb0db, 0x189a, 0xf51b, 0x9940,
    0x886b, 0x3e4d, 0xbc4a, 0x65aa, 0x19ad, 0x3782, 0x42c3, 0x7ff8, 0x0aa6, 0xfb8a, 0x145a, 0x10f5, 0xb550, 0xc8b8, 0x2dc3, 0x6b0a,
    0x8fd4, 0x3f58, 0x8564, 0x2265, 0xee69, 0xe68d, 0x73c0, 0x5287, 0x9813, 0xcbf5, 0xfad7, 0x7854, 0x407d, 0x0135, 0x1946, 0x2589,
    0xcd6a, 0xd83c, 0xecf0, 0x10a4, 0x5d96, 0x0324, 0x7426, 0x5022, 0xe2fa, 0x5f2c, 0x4f7e, 0xde90, 0xd886, 0xf2b5, 0x4c22, 0xf3e4,
    0xb216, 0x9e14, 0x75ad, 0x9eca, 0x97fb, 0x096b, 0x5e02, 0x8f7a, 0x6483, 0x8224, 0x5e08, 0x8b0c, 0xdef2, 0xd466, 0x28de, 0xc381,
    0x03fb, 0x9be4, 0x6335, 0x14e2, 0x40b1, 0x6cd7, 0xfb53, 0xc40f, 0xe628, 0x8caa, 0x16a9, 0xa1ad, 0x27c0, 0x5c3a, 0x4d8e, 0x723c,
    0x187d, 0x6754, 0xbc5b, 0x9eab, 0x3432, 0xc587, 0x85cd, 0x2ac4, 0x4c24, 0x8d74, 0x6f26, 0x66e1, 0xfe1c, 0x819a, 0xefab, 0xdca2,
    0x412b, 0x2ba2, 0x1ce0, 0xc509, 0x26fa, 0x322f, 0x3fcb, 0xfcce, 0x4fde, 0x47d9, 0x0814, 0x439e, 0xf162, 0xd2d8, 0x7a94, 0x8ec0,
    0x8d84, 0x0d5a, 0x80c2, 0xb496, 0x5ddc, 0x6e7e, 0xf47e, 0xe419, 0xd65e, 0x4f4b, 0x1495, 0xc404, 0xdacb, 0x69e9, 0x679b, 0xf731,
    0x0378, 0x1479, 0x2afd, 0xd327, 0xda8c, 0x5bde, 0xfa36, 0x4e50, 0xdb5a, 0x9f51, 0x7220, 0x3ebf, 0x463e, 0x64f9, 0x1971, 0x8c31,
    0x4feb, 0x056d, 0xba42, 0xc2d7, 0x8621, 0xf35c, 0xcffe, 0x7088, 0xb908, 0x3106, 0x684f, 0x358e, 0x386b, 0xa9e6, 0xdb5c, 0x8cdf,
    0x3f82, 0x6119, 0x525d, 0x5a54, 0xb2cc, 0xea5a, 0xe6a9, 0x6b38, 0x343d, 0xbb70, 0xe548, 0x6e5a, 0x1b13, 0x5510, 0xd6ff, 0x1a22,
    0x11fb, 0xc4bf, 0x4669, 0x4832, 0x5bfb, 0x125a, 0xdf07, 0x7090, 0xd6bf, 0xc2a3, 0xc73c, 0x2366, 0xfd43, 0x3c97, 0x1a3a, 0x5028,
    0x9f09, 0x87eb, 0x6521, 0x1638, 0x8967, 0x5aad, 0xad72, 0x6057, 0xec04, 0x813c, 0xd872, 0xdfbc, 0x4f91, 0xfbc8, 0xcfb2, 0xa5b7,
    0x9bf1, 0x6b9b, 0xd204, 0x1962, 0x0f62, 0x7389, 0xc3c9, 0x361b, 0x40d9, 0xbbc2, 0x293e, 0xa920, 0xc351, 0x51c3, 0xb588, 0xf4d6,
    0x9aa3, 0xd721, 0xa0f2, 0x5f13, 0xbdc0, 0x08f1, 0x58b6, 0xb658, 0xa9aa, 0x8043, 0x0ff6, 0x1e8d, 0x4c48, 0x4695, 0xce4a, 0x23e9,
    0x0ff5, 0x5cf2, 0x159b, 0x55b3, 0x80a0, 0xed58, 0x5885, 0xb9b0, 0x0fab, 0x6df1, 0x86bc, 0x22c6, 0x8520, 0x6787, 0xe5b1, 0xe002,
    0xab2e, 0xff8b, 0xeb0f, 0x5cb3, 0x859e, 0x7d2c, 0x8846, 0x316e, 0xafc2, 0xb3d8, 0x5d81, 0xcab5, 0x0ae7, 0xc864, 0xc113, 0x3529,
    0xa87a, 0x3302, 0x2ea9, 0x2a2d, 0x15cb, 0xb6e1, 0x5585, 0x7297, 0x8e1a, 0x1a8e, 0x6ca0, 0xe15d, 0xff23, 0x90fa, 0x1d72, 0x39aa,
    0xdfdb, 0x1cb5, 0xd39b, 0x9bd3, 0x0a92, 0xe293, 0x62d6, 0x0b5c, 0xb6f7, 0xc05f, 0x8ccc, 0x56a3, 0xacdd, 0x3777, 0xbb9f, 0xe81a,
    0x9375, 0x289d, 0x6325, 0xb48a, 0x8a34, 0x01d4, 0xebdb, 0xbada, 0xd63b, 0x9ca6, 0x1c2f, 0x2047, 0x021e, 0xca5e, 0x2f4f, 0x4f4d,
    0x665c, 0xd8b7, 0x5402, 0x830c, 0xf798, 0x9dcc, 0xf9e6, 0xa1eb, 0xedd9, 0xa820, 0x7417, 0x7a7e, 0x10c0, 0x3630, 0x9d57, 0x79f3,
    0x4214, 0x7444, 0x2ec8, 0xa859, 0xedff, 0x2b62, 0x9968, 0xda20, 0x6ef0, 0xab31, 0x537f, 0x67f1, 0xee05, 0x4788, 0x1222, 0x97c4,
    0x7626, 0xa4d7, 0x31ab, 0xf06e, 0xdd8b, 0xea20, 0xec37, 0xac86, 0xd0ae, 0xeeb8, 0x540d, 0x2666, 0xf332, 0xf5f0, 0x2be2, 0x89bf,
    0x5d68, 0x42f7, 0xa0a1, 0xdb31, 0x0424, 0xddaf, 0x9321, 0x9c2b, 0x6884, 0xe316, 0x83e2, 0x053e, 0xdf7b, 0xc8e8, 0xef29, 0x2244,
    0x2811, 0x3a13, 0x0852, 0x7678, 0xa943, 0x39e0, 0x9132, 0x42b2, 0x7e67, 0x9fe5, 0xe284, 0x0e70, 0x1562, 0xc2e6, 0xcf55, 0xde2d,
    0x620f, 0x8973, 0xb640, 0xca4d, 0x4b5d, 0x5996, 0x972a, 0xe222, 0x737a, 0x7a73, 0x520a, 0x9aff, 0xb7bf, 0x6a39, 0x4a8f, 0xbf67,
    0xfd86, 0xd590, 0xc4f0, 0xf0c4, 0xc4d2, 0x6481, 0xcdde, 0x75c9, 0x4bdd, 0xd79d, 0x4ace, 0xe923, 0x4661, 0xb5a1, 0xb8c6, 0x8497,
    0x887f, 0x5983, 0x5b1a, 0x2c5e, 0xe8e3, 0xf5cf, 0xa434, 0x3fc8, 0xc09c, 0x5fae, 0x6e1f, 0x8df4, 0xbc26, 0x588d, 0xa45e, 0xdf28,
    0x355d, 0xea96, 0x6165, 0xc003, 0xbfe0, 0x22de, 0x61b5, 0x7816, 0xb12d, 0xb707, 0x399e, 0x8ce2, 0x9673, 0xafcd, 0x96fc, 0xbf96,
    0xffd6, 0x221a, 0x8240, 0xf566, 0x028f, 0xe3c2, 0x5e6c, 0x1afe, 0xacc7, 0x8948, 0xb07f, 0x68f4, 0x0816, 0xc286, 0x498d, 0x6ada,
    0x35c6, 0xbc24, 0x4889, 0xc7ac, 0x52fd, 0x98be, 0xef6d, 0xbf80, 0x3d6d, 0x9192, 0x2186, 0x5cf3, 0x0159, 0xe428, 0xcd98, 0xa990,
    0x0dd5, 0xbd90, 0x97c2, 0xc97d, 0x562b, 0xfd33, 0x50fd, 0x86ab, 0x73fd, 0x38fa, 0xca13, 0xd337, 0xc1e6, 0x6b56, 0xb0b3, 0x79c0,
    0x2219, 0x9bf0, 0xbf25, 0xe5af, 0xbca1, 0xce04, 0x07fe, 0x6aa9, 0x0bd7, 0x98e0, 0x4ef5, 0xc256, 0xd485, 0xc094, 0x9744, 0xce0a,
    0x2ff0, 0x1671, 0x09bd, 0x4111, 0x0d54, 0x6626, 0xc7fc, 0x8292, 0xa6b7, 0xac45, 0x990d, 0xaf7b, 0xfffd, 0xffd8, 0x45fc, 0x1870,
    0xa599, 0x92d1, 0xd7fc, 0x9052, 0x1f87, 0x14b6, 0xd8ff, 0xfdff, 0xe10e, 0x2e53, 0xd6ec, 0xfb17, 0xeab0, 0xaff2, 0x1442, 0x4474,
    0x60d4, 0x9ef0, 0xb6c4, 0x1edc, 0x71be, 0x78e7, 0xbf01, 0xdd48, 0xf1ff, 0xc686, 0x43cb, 0x105b, 0x5616, 0x3c00, 0xc90d, 0x74fa,
    0x6c43, 0xf95a, 0x717d, 0x2f96, 0xa03e, 0x809a, 0xcc09, 0xe5fa, 0x78b1, 0x696c, 0x27ef, 0xa3ec, 0x7f0e, 0x40cd, 0x2612, 0x46ba,
    0xbf04, 0x9dc5, 0x2553, 0x014e, 0x7aa8, 0x0233, 0x8318, 0x845c, 0xf86d, 0x2d15, 0x1648, 0x2c4d, 0xc5b2, 0xb2c5, 0x89af, 0x7950,
    0x7bf6, 0xf4a8, 0xfc74, 0xaeba, 0xe4ba, 0xef66, 0x2786, 0x8627, 0x3a35, 0x651e, 0x20de, 0x8d4d, 0x4361, 0x0b04, 0xcc8c, 0xa356,
    0x5438, 0x45d9, 0xb849, 0xeaeb, 0x750b, 0x1cd9, 0x8fc7, 0xab8c, 0x7258, 0x65a3, 0x95fc, 0xa4aa, 0x8b33, 0x66e3, 0x002a, 0x6bc4,
    0x5866, 0x3c88, 0xefaf, 0xd112, 0x5101, 0x43cf, 0xcf59, 0x6525, 0xeff9, 0x2a93, 0x515f, 0x3e06, 0xe2d2, 0x60a5, 0x0e23, 0x3c4e,
    0x8fe6, 0x5c4e, 0x2e23, 0x8631, 0x02d3, 0x5004, 0xac0d, 0x80a5, 0x0ffa, 0x62da, 0x2557, 0x4a93, 0x3358, 0x5e06, 0x715f, 0x54c1,
    0x7866, 0x1e5c, 0x88b9, 0x5c88, 0xccda, 0xf112, 0x0fb0, 0x1adc, 0xa84a, 0x8525, 0xef59, 0x941b, 0x7101, 0x7b1e, 0x202e, 0x63cf,
    0x7438, 0x514c, 0x4032, 0x65d9, 0xae55, 0x0aec, 0xd849, 0x60ec, 0x16fb, 0xcb8c, 0xafc7, 0xd6ae, 0x950b, 0xe47a, 0x2024, 0x3cd9,
    0xf2c7, 0x8bc4, 0x202a, 0x79e8, 0xab33, 0x4446, 0x8adc, 0x86e3, 0x9258, 0x6194, 0x8f98, 0x85a3, 0xa114, 0xc4aa, 0xb5fc, 0xe4b7,
    0xdf04, 0x3531, 0x11a0, 0xbdc5, 0x5633, 0x214e, 0x4553, 0x7551, 0xed6d, 0xa45c, 0xa318, 0xb606, 0x9aa8, 0xe8cf, 0xce0b, 0x2233,
    0x8f8c, 0x9950, 0xa9af, 0xdc17, 0xe5b2, 0x3ab5, 0x8466, 0xd2c5, 0x186e, 0xc545, 0x45d5, 0x4d15, 0xc137, 0x4c4d, 0x3648, 0x4822,
    0x16bb, 0xc356, 0xec8c, 0x71f7, 0x6361, 0xa54f, 0xdb67, 0x2b04, 0x5a35, 0x12be, 0xa131, 0x851e, 0x7c92, 0xad4d, 0x40de, 0x3a76,
    0x9bf6, 0x332d, 0x3b44, 0x14a9, 0xb08b, 0xceba, 0x1c75, 0x3063, 0x8664, 0xa627, 0x4786, 0xd51a, 0x04bb, 0x017a, 0xce9b, 0x0f67,
    0x4ff0, 0x2c0b, 0xc896, 0x3671, 0x95ae, 0x6111, 0x29bd, 0xbd7f, 0x9880, 0xa292, 0xe7fc, 0x0f03, 0x2d54, 0x322e, 0xec36, 0x8626,
    0xc51b, 0x3870, 0x65fc, 0xa63b, 0x1ffe, 0xd0b0, 0x5434, 0x1fd9, 0xc6b7, 0x38c4, 0x42e4, 0xcc45, 0xadec, 0xcf7b, 0xb90d, 0x0794,
    0xefbd, 0x6474, 0x3442, 0x718b, 0x0ab1, 0x6173, 0xbf33, 0xcff2, 0x010f, 0x652f, 0xeb1d, 0x4e53, 0x0860, 0x1b18, 0xf6ec, 0x5410,
    0xc599, 0xb371, 0x392c, 0xb2d1, 0x7169, 0xb052, 0xf7fc, 0x9549, 0x2b0b, 0x1e00, 0xf8ff, 0x6343, 0x3f87, 0xa066, 0xbc58, 0x34b6,
    0xda9e, 0x66ba, 0x4612, 0x152a, 0x9f0e, 0xde5e, 0x1978, 0x60cd, 0x98b1, 0x87a9, 0x6713, 0x896c, 0x48ec, 0xc3ec, 0x47ef, 0x419e,
    0x8c43, 0x6b7c, 0x3148, 0x195b, 0x63e4, 0x4f96, 0x917d, 0x304f, 0x4ff1, 0x05fb, 0xec09, 0x9ec4, 0xc03e, 0x706b, 0x582c, 0xa09a,
    0x80d4, 0x2038, 0x3b52, 0xbef0, 0xe91b, 0x3edc, 0xd6c4, 0x393a, 0xf583, 0xfd48, 0xdf01, 0xd0c1, 0x91be, 0xedc3, 0xc46c, 0x98e7,
    0x4f5d, 0x94fa, 0xe90d, 0xf7e4, 0x7616, 0x0f38, 0x3cb6, 0x5c00, 0x1200, 0x3d62, 0x3a48, 0xe686, 0xab96, 0x305b, 0x63cb, 0x05c0,
    0x820f, 0x8918, 0x829c, 0xa973, 0xe854, 0xea4d, 0xd640, 0xec66, 0xd963, 0x0223, 0xb72a, 0x08a6, 0x6b5d, 0xb2a7, 0xb845, 0x7996,
    0x2e01, 0xdf67, 0x6a8f, 0xcaa6, 0xd7bf, 0x0d81, 0x2aa3, 0x8a39, 0x937a, 0x153a, 0xa1cc, 0x9a73, 0xeb2c, 0xbaff, 0x720a, 0xcea5,
    0x10aa, 0xa497, 0xd8c6, 0x176d, 0x6661, 0x149c, 0xf140, 0xd5a1, 0x6bdd, 0xc472, 0x4d37, 0xf79d, 0x35ec, 0x0924, 0x6ace, 0xeee0,
    0x1d87, 0x18ce, 0xedb5, 0xf590, 0xec81, 0x10c5, 0xe4f0, 0x59f5, 0x71a6, 0x95c9, 0xedde, 0x672e, 0xe4d2, 0xa865, 0x3348, 0x8481,
    0x680c, 0xdf96, 0xb6fc, 0x6340, 0xb673, 0xab49, 0xbb8b, 0xcfcd, 0xd12d, 0xe4d5, 0x40e8, 0xd707, 0x79db, 0xace2, 0x599e, 0x9745,
    0x555d, 0xc1c3, 0xaa62, 0x0a97, 0x1e29, 0xe003, 0x8165, 0xfe09, 0x2280, 0x9816, 0x81b5, 0x14b0, 0xdfe0, 0x01d7, 0xe1da, 0x42de,
    0xa87f, 0x92e7, 0x2f68, 0x7983, 0x4539, 0x4c5e, 0x7b1a, 0x77dd, 0x2f25, 0x5fc8, 0xc434, 0xf960, 0x08e4, 0x85e3, 0x59da, 0x15d0,
    0x441f, 0xff28, 0xc45e, 0x2c18, 0xdc26, 0x5231, 0x0540, 0x788d, 0xe09c, 0x112c, 0x1f47, 0x7fae, 0x82f2, 0xadf4, 0x8e1f, 0x49ca,
    0xd370, 0xee0a, 0xb744, 0x5793, 0xf485, 0x17d6, 0x8e51, 0xe094, 0x2bd7, 0x5d4a, 0x6760, 0xb8e0, 0x41cf, 0xe256, 0x6ef5, 0x240a,
    0x4219, 0x4611, 0x99f2, 0xbbf0, 0x8f48, 0x05b0, 0xdf25, 0x47bf, 0x5c2a, 0x8aa9, 0x27fe, 0x1d6c, 0xdca1, 0x2ca3, 0xb2c4, 0xee04,
    0x2dd5, 0xba6a, 0x61a5, 0xdd90, 0xba79, 0xe97d, 0xb7c2, 0x3e42, 0xdd52, 0xa6ab, 0x70fd, 0x33e1, 0x762b, 0xbd97, 0x8106, 0x1d34,
    0x3794, 0x99c0, 0xd0b3, 0x8fa5, 0xe1e6, 0x3652, 0xa163, 0x8b56, 0x93fd, 0xd45a, 0x3d0b, 0x58fa, 0x18b3, 0xf337, 0xea13, 0xb8f4,
    0x1fd7, 0xa70f, 0xeae7, 0x421a, 0xdbce, 0x1567, 0xa240, 0x56ef, 0xa2d1, 0x3afe, 0x7e6c, 0xb7e3, 0x228f, 0x006f, 0x67b3, 0x03c3,
    0xecd8, 0x8ada, 0x698d, 0x6555, 0x2816, 0xed9a, 0xefe4, 0xe286, 0xccc7, 0x2c0c, 0x5737, 0xa948, 0x005b, 0x88f4, 0xd07f, 0xd316,
    0xce15, 0xc990, 0xed98, 0xd050, 0x2159, 0x4899, 0x3b3c, 0x0429, 0x5d6d, 0xf5ed, 0x5a45, 0xb192, 0xd0f5, 0x7cf3, 0x4186, 0x2a01,
    0x55c6, 0xc7e3, 0xf575, 0xdc24, 0xb292, 0xe7ac, 0x6889, 0xf7d7, 0x6ea4, 0xdf80, 0x0f6e, 0x5b62, 0x72fd, 0xe604, 0x17cb, 0xb8be,
    0x6feb, 0x6ab3, 0xf40a, 0x256d, 0x810c, 0xe2d7, 0xda42, 0x5705, 0x07f8, 0x9088, 0xeffe, 0xfc37, 0xa621, 0x07cb, 0x2f87, 0x135d,
    0x3ff9, 0xacdf, 0xfb5c, 0xf487, 0x586b, 0x8363, 0x2101, 0xc9e6, 0xd908, 0x8321, 0x61be, 0x5106, 0xec40, 0x558e, 0x884f, 0xdf10,
    0x210a, 0x3a22, 0xf6ff, 0x15b1, 0x3b13, 0xd26b, 0xeec5, 0x7510, 0x543d, 0x1981, 0x8ae5, 0xdb70, 0xefed, 0x8e5a, 0x0549, 0xf149,
    0x5f82, 0xcee2, 0x3d54, 0x8119, 0x3dfb, 0x7a54, 0x725d, 0x77b3, 0x17f8, 0x8b38, 0x06aa, 0x3313, 0xd2cc, 0xc968, 0x8fc3, 0x0a5b,
    0xac3e, 0xc5b7, 0xefb2, 0x53aa, 0x6f91, 0x02c4, 0x3a19, 0x1bc9, 0x0c05, 0xb917, 0x337d, 0xa13c, 0xc095, 0xffbc, 0xf872, 0x35d1,
    0xbf09, 0x2192, 0x4ecb, 0xa7eb, 0x86b5, 0x3638, 0x8521, 0x8c1e, 0x67ea, 0x8057, 0xcd72, 0x3fac, 0xa967, 0x1347, 0x1735, 0x7aad,
    0x31fb, 0xee9c, 0xfdef, 0xe4bf, 0x5056, 0x6832, 0x6669, 0xb464, 0x0909, 0x9090, 0xff07, 0x894f, 0x7bfb, 0xa396, 0x34b3, 0x325a,
    0xb1b9, 0x7028, 0x3a3a, 0xa3a3, 0x1d44, 0x7bb1, 0xddec, 0x5c97, 0xf6bf, 0x0080, 0xb6aa, 0xe2a3, 0xdeeb, 0x4366, 0xe73c, 0xf8d3,
    0x9433, 0x5529, 0xe113, 0x52bd, 0x2ae7, 0x87be, 0x6f24, 0xe864, 0xcfc2, 0xc94e, 0xebbe, 0xd3d8, 0x5cd4, 0xeab5, 0x7d81, 0x580b,
    0xcb2e, 0x9201, 0xe9e3, 0x1f8c, 0xabbf, 0x7cb3, 0x0b10, 0xbe45, 0xd5f7, 0x516e, 0xa846, 0x842e, 0xa59e, 0x4d1c, 0x9cc4, 0x9d2c,
    0x2ff5, 0x21d3, 0x91bd, 0x7cf2, 0x7e01, 0x75b3, 0x359b, 0xc99f, 0x4e1e, 0xd9b0, 0x7885, 0xbf8a, 0xa0a0, 0xeaea, 0x6fd8, 0x0d59,
    0x90fc, 0x0003, 0x05b2, 0x6e52, 0xa520, 0xf9af, 0xf6f6, 0x8787, 0x2fab, 0x1e90, 0xf782, 0x8df1, 0x7c83, 0x42c6, 0xa6bc, 0xf714,
    0xbbf1, 0x93d9, 0x498b, 0x8b9b, 0xeeb5, 0x3962, 0xf204, 0x13b0, 0x6781, 0x561b, 0xe3c9, 0x0172, 0x2f62, 0x0c16, 0x00cf, 0x9389,
    0x835c, 0x14d7, 0xd588, 0x6bc2, 0xe351, 0x326a, 0x6e45, 0x71c3, 0x60d9, 0x250f, 0xc897, 0xdbc2, 0xa519, 0xc920, 0x493e, 0xa6d6,
    0x3869, 0x43e9, 0xee4a, 0xbc62, 0x6c48, 0xd682, 0x15a8, 0x6695, 0xc9aa, 0x44ff, 0xe77f, 0xa043, 0xf2c0, 0x3e8d, 0x2ff6, 0xd9ad,
    0xbaa3, 0xca5c, 0xab88, 0xf721, 0xc457, 0x7f13, 0xc0f2, 0x8d3e, 0x654e, 0xd658, 0x78b6, 0x8a12, 0xddc0, 0x668f, 0x1b08, 0x28f1,
    0x3fd2, 0xfe2d, 0xef55, 0x93ed, 0x3562, 0x9af0, 0xd262, 0xe2e6, 0x9e67, 0xada3, 0x968b, 0xbfe5, 0x23be, 0x2e70, 0x0285, 0xa3a1,
    0x4811, 0x7c4b, 0x7bf3, 0x5a13, 0xaad5, 0x9678, 0x2852, 0x6cff, 0xf07a, 0x62b2, 0xb132, 0x8376, 0xc943, 0x5836, 0xd586, 0x59e0,
    0x7d68, 0x2d02, 0x883a, 0x62f7, 0x9cee, 0xfb31, 0xc0a1, 0xc6e6, 0x0d94, 0xbc2b, 0xb321, 0x75ef, 0x2424, 0x4242, 0x0020, 0xfdaf,
    0x92f8, 0x4244, 0x0f2a, 0xf135, 0xff7b, 0xf92f, 0x8e8e, 0xe8e8, 0x8884, 0xf125, 0xa2b3, 0x0317, 0xfc1f, 0x253e, 0xa3e2, 0xaab6,
    0x6214, 0x56cc, 0x4e12, 0x9444, 0x25ab, 0xc859, 0x4ec8, 0x3be1, 0x47f9, 0xfa20, 0xb968, 0x5bfe, 0x0e00, 0xd486, 0x3f78, 0x4b62,
    0x1481, 0xb7c4, 0x3222, 0x9d59, 0x0e06, 0x7820, 0x3b0a, 0x6788, 0x8ef0, 0x8a6a, 0x8464, 0xcb31, 0xd8db, 0x87f1, 0x737f, 0xf33a,
    0xb3f8, 0xa9bf, 0x4be2, 0x0911, 0x1333, 0xaa06, 0xc4df, 0x15f1, 0xf0ae, 0x3650, 0x1cd5, 0x0eb9, 0xab51, 0x4666, 0x740d, 0xddcf,
    0x9626, 0x0b24, 0x3ca8, 0xc4d7, 0xc6a6, 0x106f, 0x51ab, 0x6646, 0xd7bd, 0xcc86, 0x0c38, 0x22fe, 0xfd8b, 0x6b76, 0x223a, 0x0a21,
    0xc87a, 0xdaf6, 0x1752, 0x5302, 0x6c59, 0x4a2d, 0x4ea9, 0xbecb, 0xe42f, 0x9297, 0x7585, 0x3033, 0x35cb, 0xfeb0, 0xdac1, 0xd6e1,
    0xfc21, 0x59aa, 0x3d72, 0x85ca, 0x1f24, 0x180c, 0x16df, 0xb0fa, 0xae1a, 0xf543, 0x3198, 0x3a8e, 0x9fa9, 0x015e, 0x8ca0, 0x2e99,
    0xf128, 0x081b, 0xdb9f, 0x93a2, 0xccdd, 0xd8ab, 0x7507, 0x5777, 0xd6f7, 0xb53c, 0xe22c, 0xe05f, 0xefc8, 0x76a3, 0xaccc, 0x2bae,
    0xffdb, 0xc456, 0xf7d6, 0x3cb5, 0xb811, 0xbbd3, 0xf39b, 0x63d5, 0xa160, 0x2b5c, 0x82d6, 0x486c, 0x2a92, 0x7e66, 0x3ebe, 0x0294,
    0x3d82, 0x99f3, 0xbd57, 0x4fb6, 0x30c0, 0x324e, 0x6494, 0x5630, 0x0dda, 0xc4ca, 0x1e7c, 0xc820, 0xa47c, 0x9a7e, 0x9417, 0xa56f,
    0x865c, 0x01f7, 0xff48, 0xf8b7, 0xc492, 0xa30c, 0x7402, 0xea6d, 0x8ac9, 0xc1eb, 0x19e7, 0x3672, 0x1799, 0x7d13, 0xa72f, 0xbdcc,
    0xb375, 0x017e, 0xc476, 0x489d, 0xdafa, 0xd48a, 0x8325, 0x326e, 0x8a8a, 0xdada, 0x0bdc, 0x108f, 0xaa34, 0x4262, 0xfe4d, 0x21d4,
    0x8b58, 0x6f4d, 0x4f4f, 0x8383, 0x221e, 0xffdc, 0xeebc, 0xea5e, 0xf63b, 0x66af, 0x14f7, 0xbca6, 0xc96e, 0x4047, 0x3c2f, 0x75d3,
    0xffe8, 0x2d78, 0xb56a, 0x9e25, 0x6a40, 0x1c10, 0x72d5, 0x0b66, 0x361f, 0xe161, 0xa35a, 0xf0c8, 0x7ffc, 0xa1b1, 0x2086, 0x9559,
    0x6906, 0x9030, 0xe103, 0x48cd, 0x184d, 0x6b63, 0xe58b, 0x5f5c, 0xe868, 0xa140, 0x59e4, 0xf8bb, 0x8b5a, 0x7fb2, 0x3cdd, 0xbef4,
    0xef7f, 0x25ff, 0x1117, 0xb954, 0x025b, 0x5b02, 0x0a52, 0xff9a, 0x62ca, 0xf65c, 0x9a58, 0x902c, 0x96a7, 0xfade, 0x1b36, 0xc9c3,
    0xe43a, 0x5473, 0x6b6e, 0xb034, 0x9546, 0x484c, 0x1e58, 0xa7d1, 0xcb10, 0x9026, 0x050e, 0x3736, 0x86fd, 0x90d5, 0xca1f, 0x1fca,
    0xc1f8, 0x3e9e, 0x74bd, 0x935f, 0xf666, 0xaa7f, 0xf82f, 0xb788, 0x0bf9, 0xa5e4, 0xc257, 0xab46, 0x8f05, 0x8c77, 0x208e, 0x8e29,
    0x86bd, 0x8124, 0x72a1, 0x5c8f, 0x773a, 0x4b6a, 0xd363, 0x5f19, 0xad41, 0xb0e0, 0xec94, 0x2cfc, 0xca37, 0x17a9, 0x0026, 0x1134,
    0x4f07, 0xd54d, 0x37e9, 0x81a2, 0x151f, 0xb555, 0xc635, 0x24bc, 0x3965, 0x3e0e, 0x0aab, 0x2ee5, 0x5d70, 0x7e46, 0x1055, 0x131b,
    0x9c02, 0xa64a, 0x313a, 0xe3a5, 0x8870, 0xfecf, 0x8fba, 0xb5d7, 0xff8e, 0xfe49, 0xabc6, 0x19b2, 0x7fb0, 0xf468, 0x55b5, 0x1f15,
    0x4bef, 0xd3cd, 0x1b99, 0x3a38, 0x8202, 0x63b5, 0xc95f, 0xaa4a, 0xbf5f, 0xdc51, 0x2387, 0x5910, 0x73c7, 0xacb8, 0xe618, 0x1c8b,
    0xf0d6, 0x71ef, 0x6bc0, 0xab54, 0xd93b, 0x46c7, 0x591e, 0x3534, 0x734f, 0x346f, 0x01c1, 0x06a4, 0x6586, 0x83c8, 0xa4d4, 0x4f04,
    0x4aa1, 0x92f6, 0x871f, 0xb614, 0x50f0, 0x897a, 0x0f11, 0xee7f, 0x6dbe, 0xb7f1, 0xb8ee, 0xaed0, 0x08b4, 0xa1f5, 0x6656, 0xd715,
    0x59a8, 0xc82e, 0x3041, 0x329d, 0xbff3, 0x21d0, 0xce8a, 0x5c0c, 0xfc45, 0x7018, 0xf692, 0xa14a, 0x7e48, 0x0180, 0xd3e6, 0x457a,
    0xbff2, 0x6142, 0x0cf0, 0x3899, 0xc598, 0x99bf, 0x05b1, 0x3cb4, 0x309e, 0x5c39, 0x9d56, 0x46b9, 0x0883, 0xa427, 0x69ae, 0x57ff,
    0xbfa8, 0x2910, 0x1def, 0x6d1b, 0x36ba, 0x2793, 0xd2c3, 0xb2e6, 0x351e, 0x26a3, 0x1785, 0xd5fe, 0x95af, 0xc436, 0x9000, 0xeb11,
    0x5b2c, 0x2c5b, 0xaf89, 0x5079, 0x9b0d, 0xe1e4, 0x0cb1, 0x6902, 0x359c, 0xf354, 0x2d2a, 0xa92e, 0x3844, 0x67ff, 0xe16b, 0x5d21,
    0x5fc0, 0xf7b6, 0x63d6, 0xa444, 0x0d7f, 0x2f36, 0x7ab3, 0x4120, 0xbae4, 0x66ef, 0x7862, 0x6278, 0x7111, 0x4b95, 0xe526, 0x5b20,
    0x5878, 0x87cd, 0xe2ff, 0xcbaa, 0xdea6, 0x2740, 0xda2a, 0x7f70, 0xc5c8, 0xea09, 0x66df, 0x6578, 0x0583, 0xd88b, 0x2295, 0x8768,
    0x3e18, 0x4a9a, 0xca8b, 0x5d9b, 0x1c9e, 0xab3e, 0x915b, 0x70dc, 0xaf21, 0xb188, 0x40f8, 0x3352, 0xcd6f, 0x2d71, 0xe9a7, 0xca47,
    0x8fd9, 0x74e7, 0xccb2, 0x5aea, 0x8399, 0x1243, 0x4bd1, 0xc772, 0xba8f, 0xd7b5, 0x9291, 0x6d3d, 0x12d4, 0x425e, 0xbb59, 0xee6e,
    0x66f5, 0x4082, 0x705d, 0x467e, 0x3cca, 0x6a74, 0x06a1, 0xc739, 0x5cdb, 0xdf8c, 0xe774, 0xd98f, 0x6b9d, 0x5fe7, 0x9818, 0x34e4,
    0x4373, 0x241d, 0xd89a, 0x2747, 0x1323, 0xfe53, 0x6488, 0xc26f, 0x3a32, 0xdef7, 0xb1d1, 0x4ef6, 0x9bd9, 0xfea9, 0x6ad8, 0xd762,
    0x8639, 0x22c7, 0x4ca4, 0xac90, 0xcc2c, 0x9382, 0xd044, 0x9800, 0xb21b, 0x34ac, 0x7a5c, 0x09f5, 0xdf4c, 0x4f28, 0xff4a, 0x0028,
    0x165a, 0x5a16, 0x88b5, 0xd6f4, 0x0400, 0xb5ff, 0x330a, 0xad0d, 0xa796, 0xdefa, 0x4dca, 0x40b6, 0xa9e4, 0x1166, 0x51e9, 0xecf7,
    0x9dd7, 0xdd4b, 0x581e, 0xd1a7, 0x2415, 0x27c5, 0x2a7c, 0xdb3d, 0xc0bd, 0xf108, 0xe62d, 0x2de6, 0x4d55, 0x021c, 0x29f1, 0xe0ff,
    0xf211, 0xbe15, 0x2442, 0xf29e, 0xdec5, 0x4643, 0x5857, 0x0333, 0x9dfd, 0x2848, 0xdb5f, 0x01b3, 0x4966, 0x259c, 0x8a1e, 0x272d,
    0x1eee, 0xe20c, 0x5b2f, 0x5202, 0x037d, 0x6e67, 0x17ef, 0x11cf, 0x9e03, 0x943a, 0xf785, 0xda91, 0xc21f, 0x9aa5, 0x47c2, 0xd12f,
    0x2624, 0xa34a, 0x54d5, 0xc021, 0xe1a8, 0xa8e1, 0xa06c, 0x5de1, 0x8d89, 0x2a88, 0x9a1e, 0x5db8, 0x9c35, 0x54f3, 0x5c84, 0x1883,
    0x80ac, 0x7214, 0x9eb6, 0x48c9, 0x040b, 0x6143, 0xd663, 0x44a4, 0xa330, 0xdad0, 0xa5ee, 0xebce, 0xdbdf, 0xb51c, 0x39bd, 0xbd39,
    0x0d66, 0xfe21, 0xf2f4, 0xd4f4, 0x509f, 0xc7a5, 0x8b2f, 0x8f49, 0xb421, 0xefa8, 0x8dad, 0x3461, 0x431f, 0x7542, 0x4c29, 0xd27c,
    0x1882, 0x6655, 0x9314, 0x9f6a, 0x33e0, 0xeb1c, 0xb53b, 0x4e1d, 0x8f79, 0xc9dc, 0x78e6, 0x8a33, 0x9f27, 0x6112, 0xd241, 0x3437,
    0xd80e, 0xaa30, 0xea10, 0x26ff, 0xb84f, 0x2b8e, 0x2676, 0xd7a4, 0x5941, 0xc9a0, 0xe9dd, 0x08dc, 0x4130, 0x9d32, 0xf2af, 0xb0ea,
    0x2e65, 0x51dd, 0x4fe3, 0xf39c, 0x9282, 0xfcc7, 0xbe6d, 0xf1b7, 0xc55f, 0x42bc, 0x72e4, 0x1a65, 0x7f53, 0xf167, 0x8e2b, 0x4fb8,
    0x120d, 0xac31, 0x3971, 0x9a3f, 0x663e, 0x6061, 0x7a4b, 0x84f9, 0xfb5a, 0xb57e, 0x0994, 0xbf51, 0x4728, 0x5ebf, 0x9220, 0x9d1b,
    0x2378, 0xd19a, 0x2a71, 0x3479, 0x0208, 0xf327, 0x4afd, 0x1daa, 0x67bd, 0x6e50, 0x1a37, 0x4f01, 0xfa8c, 0xdad6, 0x6f65, 0x7bde,
    0xad84, 0xea9d, 0x858e, 0x2d5a, 0x74ee, 0xd496, 0xa0c2, 0x4c73, 0x74d0, 0x041a, 0x147f, 0x04ef, 0x7ddc, 0x233b, 0x25c7, 0x8e7e,
    0xfbda, 0x1732, 0x879b, 0xd948, 0xfacb, 0xb5e8, 0x9921, 0x89e9, 0xf65e, 0xd8ad, 0x659f, 0x6f4b, 0x68c4, 0xe404, 0x3495, 0x307c,
    0x387d, 0xfeb8, 0x0981, 0x8754, 0x0b18, 0xbeab, 0xdc5b, 0x1a01, 0x98e1, 0x4ac4, 0xa5cd, 0x5902, 0x5432, 0xd089, 0xefc5, 0xe587,
    0x709a, 0xfca2, 0x0fac, 0x32b2, 0x1e1d, 0x16c7, 0x3df2, 0xa19a, 0x6c24, 0x6ad0, 0x088b, 0xad74, 0x545c, 0x86e1, 0x8f26, 0x4e25,
    0xe55a, 0xaec0, 0x9a94, 0xe089, 0x1163, 0x435e, 0x7001, 0xf2d8, 0x6fde, 0x6c39, 0xd2db, 0x67d9, 0x11b3, 0x639e, 0x2814, 0x0d1d,
    0x612b, 0xa77a, 0x6705, 0x4ba2, 0xe99b, 0xe509, 0x3ce0, 0xd859, 0x4671, 0x1ccf, 0x5fcb, 0x4b7e, 0x46fa, 0xb70f, 0x6f94, 0x522f,
    0xafd4, 0xdaa1, 0xd217, 0x5f58, 0x323e, 0x4265, 0xa564, 0x9e89, 0xb28c, 0x7287, 0x93c0, 0xe60a, 0x0e6a, 0x44a7, 0xcafb, 0x068e,
    0x5cc5, 0x4589, 0x3946, 0x8253, 0x607d, 0x9195, 0x18f2, 0x2135, 0xb813, 0xcb12, 0x7284, 0xebf5, 0xf98a, 0x9854, 0x1ad8, 0x628c,
    0xe5c3, 0x13e5, 0x6c22, 0x73f1, 0xf886, 0x427c, 0x77aa, 0x12b6, 0x02fb, 0x16b0, 0x48bc, 0x7f2c, 0x9f6b, 0xfe90, 0x6f7e, 0x6b42,
    0xed6a, 0x7afc, 0x4190, 0xf83c, 0xd183, 0x30a4, 0x0cf1, 0x4761, 0xb156, 0x7022, 0x9426, 0x84ac, 0x7d96, 0x2dbd, 0x598e, 0x2324,
    0xbdd2, 0x923c, 0x6d8e, 0xf38f, 0x47c0, 0x5d2d, 0x797b, 0x7c3a, 0x0629, 0x632b, 0xad31, 0xacaa, 0x00fb, 0xc1ad, 0x36a9, 0x3d08,
    0x23fb, 0x8a86, 0xe8f7, 0xbbe4, 0x7a11, 0x34e2, 0x8335, 0x65e0, 0x71e4, 0xe40f, 0x1b54, 0x2de0, 0x60b1, 0x826a, 0x29be, 0x8cd7,
    0xd216, 0xb82a, 0x4bee, 0xbe14, 0x6f23, 0xbeca, 0x95ad, 0x17d5, 0x6c9f, 0xaf7a, 0x7e02, 0xcbf4, 0xb7fb, 0x08c8, 0x1aa7, 0x296b,
    0xbbd4, 0xe381, 0x48de, 0xc9d0, 0xfef2, 0x3013, 0x7254, 0xf466, 0x8483, 0xf83e, 0x7092, 0xa224, 0x4742, 0xab0c, 0x7e08, 0xe950,
    0xdfed, 0xbde9, 0xc66e, 0x640d, 0xb9ba, 0x4a45, 0xf10e, 0x97a6, 0xbd51, 0x9f89, 0x1624, 0x81f4, 0x77fa, 0x9ad9, 0x3290, 0x6001,
    0x56b5, 0xf851, 0x5c43, 0x69f2, 0x490b, 0x3f65, 0x5f79, 0xd1c0, 0xaffb, 0xb2ce, 0xafd6, 0x6b5f, 0xf5f9, 0x9103, 0xc86d, 0x3ca0,
    0x5597, 0xffc5, 0x42cf, 0x3e96, 0x87fa, 0x2e79, 0x4050, 0x76ac, 0xcf84, 0xc3f5, 0xc4b3, 0xad56, 0x88fd, 0xe25f, 0xadfd, 0x092d,
    0x910c, 0x4df8, 0xde50, 0x6702, 0x86ea, 0x5ec8, 0xab15, 0xfe99, 0x9aae, 0x754b, 0x5ff0, 0x116f, 0xc43f, 0xacc1, 0xf471, 0xfae7,
    0x10d2, 0x573f, 0x4eee, 0x4d05, 0x66c2, 0x8281, 0xced9, 0x26ad, 0x21bc, 0x0bd8, 0x28e5, 0xaa3c, 0x6eff, 0x4def, 0x8d46, 0x535b,
    0xa1fd, 0x3178, 0x7684, 0x6df2, 0xf3c8, 0xd66b, 0xc058, 0x5df5, 0x0614, 0xa4b5, 0xebfd, 0x4de9, 0x790b, 0x6b87, 0x24f8, 0x6f0a,
    0x1c41, 0x531c, 0xa958, 0x5fb5, 0x217b, 0xaa1b, 0xdf93, 0xa437, 0x503c, 0x6875, 0x3098, 0x567b, 0x7c07, 0x4307, 0x95f8, 0xa37f,
    0x28af, 0x8737, 0x196a, 0x34b9, 0xd7ec, 0x7b6b, 0x53ea, 0x3d75, 0x2f0c, 0x834c, 0xf0ca, 0xbecd, 0xd60f, 0xf523, 0xf6b7, 0xb424,
    0x6f02, 0x8b0a, 0x4dc3, 0xb82b, 0xd550, 0x108b, 0xb14b, 0xe8b8, 0x2aa6, 0x70a9, 0xb230, 0x1b8b, 0x3316, 0x30f5, 0x345a, 0xc75f,
    0xa86b, 0x442f, 0xdd12, 0x5e4d, 0xc645, 0x85aa, 0xdc4a, 0xe839, 0x75b0, 0x9ff8, 0x62c3, 0x3dec, 0x39ad, 0x0519, 0x294e, 0x5782,
    0x2bf4, 0xd1e3, 0xa4a6, 0xb98d, 0xac72, 0x6207, 0x5eb8, 0xc704, 0x94b8, 0x70d1, 0x9f64, 0xa04f, 0xd783, 0x9315, 0x3625, 0x53cc,
    0xea32, 0xb940, 0x151c, 0xea1d, 0xd0db, 0xe398, 0x3d4b, 0x389a, 0xf35e, 0xfc01, 0xbb01, 0x458b, 0x7c8a, 0xde47, 0x5354, 0x7784,
    0x0436, 0xff5e, 0xf5d6, 0x5116, 0x6847, 0xdf26, 0x9ae9, 0x6a7b, 0x2509, 0xed83, 0xccd6, 0xd3bf, 0x3fc5, 0x17ec, 0x5b8a, 0x5bc1,
    0x2256, 0x0cc7, 0x15a1, 0x045e, 0x45fa, 0x6d53, 0x54a8, 0x1849, 0x3b31, 0xd625, 0x16e1, 0x59e6, 0xb027, 0x7b12, 0x1bc2, 0xbd80,
    0x0864, 0x16bf, 0xec85, 0x6ea8, 0x9fad, 0x1485, 0x8110, 0x6785, 0x00ff, 0x1211, 0xf3cc, 0x75b4, 0x7f57, 0x66f9, 0x1523, 0x6dc2,
    0x9ff7, 0xb812, 0xda90, 0x01c0, 0x015d, 0xa59d, 0xee03, 0xb90c, 0x92d0, 0xdfda, 0x10a3, 0xb662, 0xbe20, 0x5f0d, 0xec4b, 0xe887,
    0x3fe4, 0x0888, 0x0c4c, 0x721a, 0xde20, 0x4d8d, 0x362f, 0x7f0d, 0xb2d0, 0xd0b2, 0x0002, 0xffda, 0x5c0b, 0xd662, 0x30a3, 0xd0da,
    0xbff7, 0xff92, 0x12d8, 0xd812, 0xd554, 0x21c0, 0xfa90, 0x23ff, 0xe355, 0xd90c, 0x0e04, 0xc87e, 0x215d, 0x6be1, 0x04bf, 0xc59d,
    0x2864, 0x1588, 0xce59, 0x36bf, 0x38b7, 0x8ea8, 0x0c86, 0x6423, 0x7cd8, 0x8785, 0xa110, 0xcc42, 0xbfad, 0xaacd, 0xcad9, 0x3485,
    0x5848, 0x8dc2, 0x3523, 0x0f84, 0x9f57, 0xc334, 0x4419, 0x86f9, 0x20ff, 0xd290, 0x2b1c, 0x3211, 0xd02b, 0x95b4, 0x13cd, 0x76b9,
    0x2436, 0x416b, 0x014a, 0x1f5f, 0xf02f, 0x7116, 0x15d7, 0x5666, 0x5e53, 0x8a7b, 0xbae9, 0x9e17, 0x8847, 0x05ee, 0x10ea, 0xff26,
    0xc6f8, 0x7bc1, 0x7b8a, 0x535e, 0x5fc5, 0xbc42, 0x86ac, 0x37ec, 0x4509, 0x3c5b, 0x9478, 0x0d84, 0xd021, 0xf3bf, 0xecd6, 0x17fb,
    0xa2c5, 0xdd80, 0x3bc2, 0x29aa, 0xd027, 0x4fb2, 0x29e6, 0x9b12, 0x5b31, 0x8851, 0xf443, 0xf625, 0x3ada, 0x79e6, 0x36e1, 0x8a91,
    0x4256, 0x4a13, 0x1192, 0x2cc7, 0x3f96, 0x245e, 0x35a1, 0x37bf, 0x5112, 0x3849, 0x74a8, 0x3f04, 0x65fa, 0x3f01, 0x94b5, 0x8d53,
    0x8f02, 0xc2e3, 0xe52e, 0xab0a, 0xc19d, 0xd82b, 0x6dc3, 0x2b96, 0x0631, 0x08b9, 0xd14b, 0x72c7, 0xf550, 0x0466, 0x254f, 0x308b,
    0x9d6b, 0xe75f, 0x545a, 0x5d52, 0x5316, 0xe7b2, 0x6604, 0x50f5, 0x4aa6, 0x029c, 0x98cd, 0x90a9, 0x7e09, 0x3b8b, 0xd230, 0xc538,
    0x3f8a, 0x7782, 0x494e, 0x55f7, 0x59ad, 0x9b07, 0x8c15, 0x2519, 0x95b0, 0xbd53, 0xeab2, 0xbff8, 0x3464, 0x5dec, 0x82c3, 0x06b5,
    0xc86b, 0x622c, 0x7543, 0x642f, 0xf5d2, 0x7e4d, 0xfd12, 0x247c, 0x7135, 0x083a, 0xfc4a, 0xbfd1, 0xe645, 0x44df, 0xf81f, 0xa5aa,
    0xc6b8, 0x9784, 0x7354, 0x3ae4, 0x9c8a, 0x24d4, 0x21f5, 0xfe47, 0x135f, 0xf2a0, 0x554d, 0x1c02, 0x8b65, 0x658b, 0xdb01, 0x1546,
    0x0a33, 0x0dad, 0xc2bb, 0xd940, 0x512f, 0x0a1e, 0x351c, 0x1c35, 0x2c90, 0x589a, 0x5d4b, 0x9659, 0xf0db, 0x5a2a, 0xea73, 0x0399,
    0x4bf4, 0xf091, 0xe32a, 0xf1e3, 0xeb41, 0xd98d, 0xc4a6, 0x798a, 0x6089, 0xe704, 0x7eb8, 0xf099, 0xcc72, 0x1921, 0xe060, 0x8207,
    0x3662, 0x73cc, 0x5625, 0xa508, 0xf783, 0xb624, 0x8518, 0xb315, 0xb4b8, 0x2958, 0xb177, 0x90d1, 0x7e99, 0xc04f, 0xbf64, 0x39ba,
    0xffed, 0x622b, 0xdc08, 0xdde9, 0x7894, 0x840d, 0xe66e, 0xec55, 0x45ac, 0xb7a6, 0x110f, 0x7fee, 0xd9ba, 0x00bf, 0x6d7d, 0x6a45,
    0x487e, 0x8001, 0x5290, 0xfcd7, 0x97fa, 0x90e9, 0xbf00, 0xbad9, 0xdd51, 0x652e, 0xe22b, 0xbf89, 0x9c34, 0xa1f4, 0x3624, 0x6b41,
    0x7519, 0x5ca0, 0xe86d, 0x71cc, 0x15fa, 0xe8f1, 0x5639, 0xb103, 0xcffb, 0x5c09, 0x80ae, 0xd2ce, 0x0432, 0x8b5f, 0xcfd6, 0x8a42,
    0x76b5, 0x3d7e, 0xe8c1, 0x1852, 0xf2e1, 0x89f2, 0x7c43, 0x213e, 0x5dea, 0xf1c0, 0x7f79, 0x9809, 0x690b, 0x5c15, 0xb791, 0x5f65,
    0x9fbb, 0x1ae8, 0x1472, 0xac80, 0xe43f, 0x8808, 0x2189, 0xccc1, 0xbaae, 0x74fc, 0x1171, 0x954b, 0x6f31, 0x316f, 0x7ff0, 0xf894,
    0xb10c, 0x0269, 0x152d, 0x6df8, 0x9b1b, 0x8702, 0xfe50, 0x50fe, 0xb85d, 0x1e9a, 0xcb15, 0xe1b6, 0xa6ea, 0x83a7, 0x040e, 0x7ec8,
    0x7597, 0xae63, 0x636f, 0x1fc6, 0xe929, 0x5e96, 0x62cf, 0x0abf, 0x2167, 0x96ac, 0x6050, 0xba87, 0xa7fa, 0x666f, 0x4547, 0x4e79,
    0xdb08, 0x292d, 0xcdfd, 0xcceb, 0xa8fd, 0x9cfc, 0x1341, 0x0260, 0xef84, 0x3b21, 0x5064, 0xe3f5, 0x6c56, 0xcd56, 0xe4b3, 0x7e0f,
    0x8a9c, 0xd424, 0x16b8, 0xc5ac, 0xf60f, 0x8d1e, 0xc527, 0x1524, 0x4f0c, 0x0c4f, 0x8e5c, 0xa34c, 0xc975, 0xdecd, 0x10cb, 0x2690,
    0x48af, 0xda7c, 0x37a7, 0xa737, 0x1711, 0x54b9, 0x396a, 0xbfb7, 0xf8e9, 0x5d75, 0x73ea, 0x9903, 0xf7ec, 0xe951, 0xf19b, 0x9b6b,
    0x3c41, 0x910f, 0x1b7a, 0x731c, 0xe145, 0x7fb5, 0xc958, 0x22ad, 0x13e2, 0xc437, 0xff93, 0xcdfa, 0x417b, 0x1bcc, 0xe04c, 0xca1b,
    0xffee, 0xc37f, 0xb5f8, 0x4320, 0x9c07, 0x0b3b, 0x4ec2, 0x6307, 0x703c, 0x7a97, 0x2069, 0x8875, 0x082a, 0x767b, 0x5098, 0xfcaf,
    0x30d2, 0x38c5, 0xd035, 0x773f, 0xeb4f, 0x6d05, 0x6eee, 0x59bb, 0x9919, 0x46ad, 0xeed9, 0xe153, 0x86c2, 0x1608, 0xe937, 0xa281,
    0xa581, 0x735b, 0xad46, 0x1999, 0x8eff, 0x49fe, 0x80bf, 0x6def, 0x41bc, 0x1a9b, 0x9dc1, 0x2bd8, 0x746a, 0xca3c, 0x48e5, 0x5a6e,
    0xff5a, 0x8f0a, 0x44f8, 0xaf54, 0x990b, 0xed7d, 0xa7e2, 0x8b87, 0x2614, 0x2bff, 0xbf35, 0xc4b5, 0xecb3, 0x6de9, 0x0bfe, 0xe22d,
    0xc1fd, 0xab68, 0xed5f, 0x5178, 0xea45, 0x8df2, 0x9684, 0xfed6, 0x5b94, 0x7df5, 0xe058, 0x8594, 0x13c9, 0x99ef, 0xb5bd, 0xf66b,
    0x320d, 0x30bc, 0x3916, 0xcc31, 0x329a, 0xba3f, 0x5971, 0xe78e, 0x9852, 0xa4f9, 0x9a4b, 0xe85a, 0x863e, 0xea84, 0x9c64, 0x8061,
    0x8961, 0xbd1b, 0xb220, 0x470e, 0x6728, 0x52aa, 0xb8a3, 0x7ebf, 0x1b5b, 0x68c2, 0x62a5, 0xd57e, 0x6843, 0xdf51, 0x2994, 0x1d5d,
    0xddfe, 0x9bde, 0x8f65, 0x8c08, 0x1a8d, 0xa6b6, 0x7aa4, 0xfad6, 0x87bd, 0x6c58, 0xbd7e, 0x8e50, 0xdaa0, 0x6f01, 0x3a37, 0x2441,
    0x4378, 0x17b0, 0xc537, 0xf19a, 0x51ca, 0x5479, 0x4a71, 0xbc12, 0x9b2a, 0x3daa, 0x6afd, 0xf6b5, 0x2208, 0xd505, 0x7ea3, 0x1328,
    0xc0a7, 0x507c, 0x5495, 0x92bf, 0x88c4, 0x5b8d, 0xc76a, 0x0405, 0x165f, 0x1e93, 0xc499, 0xf8ad, 0xa13e, 0x8f4b, 0x859f, 0x9d92,
    0x1bdb, 0xc877, 0x7470, 0x3732, 0xfd34, 0xf948, 0xa79b, 0x97de, 0xe5e9, 0xa9e9, 0xb921, 0x4e9f, 0x1acc, 0xfc43, 0x9ede, 0xd5e8,
    0xcd84, 0x0503, 0xc8cb, 0x0a9e, 0x9db3, 0x4d5a, 0xa58e, 0xcc61, 0x9c7f, 0x6c73, 0xc0c2, 0xcc7c, 0x94ee, 0x7e9c, 0x09f3, 0xf496,
    0x21a4, 0xae7e, 0x45c7, 0x8a5d, 0x9ddc, 0x9a0a, 0x172c, 0x433b, 0x94d0, 0x3c76, 0x5863, 0x241a, 0xe345, 0x24ef, 0x347f, 0x72e2,
    0x180a, 0x722f, 0x8f94, 0x4fd3, 0x66fa, 0x4279, 0x133e, 0xd70f, 0x6671, 0xdc6c, 0x5b47, 0x3ccf, 0x6b89, 0x6b7e, 0x7fcb, 0x2d17,
    0x812b, 0xff79, 0x94d3, 0xc77a, 0xf0e5, 0x6ba2, 0x8705, 0x6a0d, 0x29d9, 0xf859, 0x5ce0, 0x477c, 0x099c, 0x4379, 0x4743, 0x050a,
    0x055b, 0xc1de, 0x71c1, 0xcec0, 0x5a60, 0x008a, 0xba94, 0x57ae, 0xce26, 0x12d9, 0x9001, 0x6107, 0x3163, 0x0f53, 0xae07, 0x635e,
    0xd27d, 0x2d1d, 0x4814, 0xddea, 0x31b3, 0x7e81, 0xc4ad, 0x839e, 0x8fde, 0x833c, 0xb1d4, 0x8c39, 0x91d8, 0x87d9, 0xf2db, 0x018d,
    0x587d, 0x8b6f, 0x42e5, 0x1eb9, 0xdf65, 0xa754, 0x2981, 0x0ba9, 0xf536, 0x3a01, 0xfc5b, 0x7fa4, 0x2b18, 0x324a, 0x27db, 0xdeab,
    0xdf22, 0x0588, 0x0fc6, 0xf4f1, 0x7432, 0x3792, 0xa95e, 0xf089, 0xb8e1, 0xb722, 0x35e1, 0x6ac4, 0x09d8, 0x7902, 0xc5cd, 0xa4c5,
    0xf41c, 0x6e25, 0xaf26, 0x6e89, 0x745c, 0xd8a5, 0xdc15, 0xa6e1, 0x8c24, 0x2a54, 0x022f, 0x8ad0, 0xb53d, 0xcd74, 0x288b, 0x7aeb,
    0x909a, 0x0c79, 0xc129, 0x1ca3, 0xcf44, 0x52b2, 0x2fac, 0xe90b, 0x32f0, 0xc19a, 0x5df2, 0xf47b, 0x3e1d, 0xbcbd, 0xf9c7, 0x36c7,
    0x836e, 0x0951, 0x9e08, 0x49a9, 0x6742, 0x2502, 0x0791, 0xcb0c, 0xa483, 0x686e, 0xc7d3, 0x183f, 0x3e4f, 0xc224, 0x9092, 0x2b90,
    0xdbd4, 0x04e8, 0x0d48, 0x0382, 0x175e, 0xe9d0, 0x68de, 0xe69e, 0xf1cc, 0x1467, 0x9254, 0x4db9, 0x1ef3, 0x93b9, 0xd407, 0x5013,
    0xf216, 0xd70e, 0xf60e, 0xd82a, 0x49f0, 0xde14, 0x6bee, 0x3f14, 0x3f46, 0x37d5, 0xb5ad, 0xf519, 0x8f23, 0x207f, 0xf7bc, 0xdeca,
    0x0c28, 0x496b, 0x3aa7, 0x9565, 0xd7fb, 0x9bd2, 0xcd69, 0x28c8, 0x8c9f, 0x9d2b, 0xdca0, 0xcf7a, 0x62c2, 0xebf4, 0x9e02, 0x346e,
    0xddd2, 0x3e3b, 0x6a68, 0xb23c, 0x11a3, 0x1390, 0x8d8e, 0xb277, 0x6a77, 0x9c3a, 0x997b, 0x5f4e, 0x67c0, 0xd639, 0xee3f, 0x7d2d,
    0x8d50, 0x5d08, 0x56a9, 0xd780, 0x20fb, 0x562c, 0xe3de, 0xe1ad, 0x2629, 0x3ed5, 0x6d95, 0x832b, 0x3104, 0xccaa, 0xcd31, 0x0a83,
    0xe791, 0xacd7, 0x49be, 0xb03f, 0x80b1, 0xbbea, 0x3fa3, 0xa26a, 0x91e4, 0xee95, 0xe64f, 0x0410, 0x5161, 0x4de0, 0x3b54, 0x95fa,
    0x43fb, 0x62f0, 0x8458, 0xaa86, 0xed08, 0xdbe4, 0x08f8, 0xaba5, 0xc8b0, 0x85e0, 0xa335, 0x46f0, 0x9a11, 0x174b, 0x68f2, 0x54e2,
    0xcfd4, 0x00af, 0x570d, 0xfaa1, 0x9ae5, 0x7f58, 0xf217, 0xc94b, 0x8bcc, 0xbe89, 0xc564, 0xe0f5, 0x523e, 0x4d3f, 0x06ed, 0x6265,
    0x52cf, 0x268e, 0xeafb, 0x28b7, 0x2e6a, 0xf55a, 0x67e1, 0x64a7, 0xd28c, 0x6490, 0xb06c, 0x9287, 0x17b1, 0x060b, 0xb3c0, 0xab0d,
    0x9cd6, 0x828c, 0x3ad8, 0x4ffc, 0x198b, 0x987a, 0x1553, 0xb854, 0xd813, 0x3d89, 0x9d98, 0xeb12, 0x9fe2, 0x0bf6, 0x9284, 0xf6c1,
    0x7cc5, 0x4c2a, 0xdc09, 0x6589, 0x0735, 0xa253, 0x5946, 0xb943, 0xb058, 0x4135, 0x38f2, 0xf207, 0x807d, 0xe0d6, 0x8314, 0xb195,
    0x7e13, 0x4324, 0x798e, 0xcc46, 0x9d96, 0x4fd7, 0x804e, 0x4dbd, 0xd156, 0xfb83, 0xf896, 0x9022, 0xeb39, 0xa4ac, 0xb426, 0xf7e6,
    0x0d6b, 0x6c70, 0xa5eb, 0x9afc, 0x0a43, 0x183d, 0x6190, 0x804a, 0x80f3, 0x6761, 0x2cf1, 0x55ab, 0xf183, 0x3c7d, 0xd9fe, 0x50a4,
    0x05c4, 0x79ec, 0x77e1, 0x33e5, 0xa573, 0x93f1, 0x8c22, 0x8432, 0x6290, 0x32b6, 0x97aa, 0xd3c3, 0x1887, 0xd6f8, 0xa7d5, 0x627c,
    0x1ea2, 0x8b42, 0x8f7e, 0xbe4b, 0xbf6b, 0x0152, 0x0b60, 0x1e91, 0x22fb, 0x609e, 0x9602, 0x36b0, 0xc7c8, 0x9f2c, 0x68bc, 0x9de4,
    0x1fe9, 0xff16, 0x1ab1, 0x4d78, 0xa408, 0xbe25, 0xd56a, 0x4b3c, 0x310a, 0x2b66, 0x92d5, 0xe42c, 0x8a40, 0x5be2, 0x0703, 0x3c10,
    0xb7f5, 0xb559, 0x4086, 0xf16b, 0x9ffc, 0xd66f, 0xac35, 0xc1b1, 0x561f, 0xe2db, 0xb7c8, 0x0162, 0xdf84, 0x10c9, 0xc35a, 0x1b1c,
    0xeff6, 0xdef4, 0x5cdd, 0xa522, 0xab5a, 0xfc28, 0xa485, 0x9fb2, 0x0869, 0xab9f, 0x3361, 0xc140, 0xd0fe, 0x18bc, 0x79e4, 0xeb35,
    0x8906, 0xd618, 0x331f, 0xb030, 0x11bc, 0x68cd, 0x0104, 0xf993, 0x9c3e, 0x7f5c, 0x058c, 0xdf55, 0x384d, 0x7e51, 0x8f0e, 0x8b63,
    0xd107, 0x3fca, 0xea1f, 0xe4b9, 0xa6fd, 0x4ccb, 0xc5ae, 0xb0d5, 0xeb10, 0xd240, 0x8269, 0xb026, 0x9ec3, 0x5736, 0x250e, 0x8ac8,
    0x043b, 0x6c5f, 0xc97e, 0x7473, 0x3ae3, 0xd034, 0x8b6e, 0x7e12, 0x9feb, 0xc7d1, 0x3e58, 0x310d, 0xb546, 0x91e1, 0xa147, 0x684c,
    0x0f80, 0xa478, 0x7ee0, 0x45ff, 0xed51, 0xd954, 0x3117, 0x0b91, 0xedf8, 0x1f9b, 0x2a52, 0xd5cd, 0x225b, 0xd9c4, 0x27b1, 0x7b02,
    0xc7f5, 0xe9c3, 0x3b36, 0xa2b6, 0xb6a7, 0x99ae, 0xe310, 0x1adf, 0x82ca, 0x952d, 0x7966, 0x165d, 0x3fc1, 0xb02c, 0xba58, 0xd08c,
    0x5c3c, 0x3f15, 0x75b5, 0xd7b7, 0x9fb0, 0x95d5, 0x03a8, 0x1469, 0x1f8f, 0x5719, 0xb2c1, 0x1e4a, 0xea16, 0x39b2, 0xcbc6, 0x73b4,
    0xbc02, 0x533f, 0x6915, 0xc64a, 0xe37a, 0x03a6, 0x513a, 0x26eb, 0x7093, 0xd5d7, 0xafba, 0x4a72, 0xa870, 0x8bb2, 0xe5ce, 0x1ed0,
    0x6f07, 0x6798, 0xd18f, 0xf54d, 0xfec8, 0xa1a2, 0x57e9, 0x993e, 0x36b3, 0x44bc, 0xe635, 0x7ae0, 0x351f, 0x9a7a, 0x3c1c, 0xd555,
    0x17e8, 0x331b, 0x3055, 0x57dc, 0x7d70, 0x840e, 0xefa9, 0x9e46, 0x5965, 0xa9ce, 0xc344, 0x5e0e, 0xc732, 0x4ee5, 0x2aab, 0x4c6b,
    0xe1f8, 0x9ca4, 0x9e9a, 0x5e9e, 0xaded, 0xb35f, 0x94bd, 0x043c, 0x0054, 0xd788, 0x1830, 0x483e, 0x1667, 0xcdc6, 0x6462, 0xca7f,
    0xb906, 0xae29, 0x408e, 0x385e, 0xaf05, 0xfd1f, 0x394d, 0xac77, 0x2bf9, 0x4955, 0x5394, 0xc5e4, 0xe4b0, 0xcb46, 0xe257, 0xfe8d,
    0x61b7, 0x3134, 0x2026, 0xa4a8, 0xea37, 0x3281, 0x53a1, 0x37a9, 0xcd41, 0x94e8, 0x2baf, 0xd0e0, 0x8dea, 0x4cfc, 0x0c95, 0x2274,
    0xa6bd, 0x4b16, 0xb07d, 0xa124, 0x66a8, 0x7c8f, 0x92a1, 0x4e84, 0x8ee9, 0x7f19, 0xf363, 0xbf1d, 0x973a, 0x29c8, 0xa8d1, 0x6b6a,
    0x4431, 0x7b20, 0x0527, 0x5998, 0x9111, 0xeacc, 0x02bb, 0x6b95, 0xdae4, 0xac6f, 0x37bc, 0x86ef, 0x1f22, 0x8278, 0x9862, 0x6440,
    0x7fc0, 0xeb9e, 0x794c, 0x17b7, 0x9bbc, 0xc444, 0x83d6, 0x1bb3, 0x0cd2, 0x6120, 0x9ab3, 0x3bb8, 0x2d7f, 0xf92d, 0x0809, 0x4f36,
    0x7b2c, 0x6044, 0x41ff, 0x4c5b, 0x99e1, 0x7079, 0xcf89, 0xbbae, 0x5bbd, 0x8902, 0x2cb1, 0x3b81, 0xbb0d, 0xa189, 0x6e43, 0x01e5,
    0x85f5, 0x7d21, 0x016c, 0x23d2, 0x5844, 0xa56b, 0x342c, 0x87ff, 0x559c, 0x6f3b, 0xfd19, 0x1355, 0x4cc2, 0xc92e, 0x4d2a, 0x5c95,
    0xdff2, 0xcb45, 0xd1d0, 0x8142, 0x41bb, 0x5899, 0x2cf0, 0x6ac3, 0x2dff, 0x5cb4, 0x25b1, 0x1fbc, 0xe598, 0x4232, 0x799d, 0xb9bf,
    0xfe1b, 0x77ff, 0x89ae, 0x97c3, 0x2883, 0x30df, 0x6f88, 0xc427, 0x509e, 0x99be, 0x9ae8, 0x7c39, 0x1fd6, 0x66b9, 0xbd56, 0x8b9a,
    0x40fa, 0x0b12, 0xb000, 0x1948, 0xb5af, 0x57eb, 0x1e50, 0xe436, 0x551e, 0x9472, 0xa9ad, 0x46a3, 0xa6f4, 0xf5fe, 0x3785, 0x127c,
    0xdfa8, 0x04ca, 0xce8d, 0x4910, 0xa780, 0x8d1b, 0x3def, 0xb7b2, 0x2c81, 0xd2e6, 0xf2c3, 0xf7e2, 0x56ba, 0x8445, 0xa712, 0x4793,
    0x6bef, 0xc85c, 0x43d7, 0xf3cd, 0xf988, 0x5a38, 0x3b99, 0xef31, 0x9eb3, 0xca4a, 0xe95f, 0x0500, 0xa202, 0x879e, 0xc3ad, 0x83b5,
    0x177f, 0x3c8b, 0x0619, 0xa804, 0x93c7, 0xe402, 0xb16f, 0xccb8, 0xdf5f, 0xa225, 0xbc13, 0xfc51, 0xb0cc, 0x7910, 0x4387, 0x14c5,
    0x335a, 0x6f04, 0xc4d4, 0x137c, 0x8586, 0xfff0, 0x1bc0, 0xa3c8, 0x934f, 0x1ae2, 0xe267, 0x546f, 0x1e43, 0x26a4, 0x21c1, 0x9929,
    0x10d7, 0x7c9a, 0xd50c, 0x91ef, 0x7895, 0xcb54, 0x8bc0, 0xb422, 0x5517, 0x5534, 0x791e, 0xcd7a, 0xf93b, 0xa1b8, 0x56d4, 0x66c7,
    0xe866, 0x657a, 0xf3e6, 0x3aaf, 0x9e48, 0xcf7c, 0x6c60, 0x2180, 0x1c46, 0x789c, 0x8680, 0x9018, 0xc5a5, 0xc14a, 0x1693, 0x3717,
    0x79a8, 0x7016, 0xf4fc, 0xe82e, 0x977d, 0x529d, 0x5041, 0xdbb3, 0xa2be, 0x7c0c, 0xee8a, 0xb3b6, 0xdff3, 0x5526, 0x89ab, 0x41d0,
    0x6aa1, 0x9171, 0x7a5a, 0xb2f6, 0x5b86, 0xd614, 0xa71f, 0x3ba5, 0x7455, 0x0e80, 0x2f11, 0xaccd, 0x70f0, 0x5755, 0x3d3c, 0xa97a,
    0x154c, 0xf715, 0x8656, 0x1a63, 0x28b4, 0x21ea, 0x3a10, 0xc1f5, 0x8dbe, 0x9413, 0x168d, 0xd7f1, 0xcb05, 0xced0, 0xd8ee, 0x011c,
    0xefcf, 0x6fb8, 0xae2b, 0xccac, 0x9f53, 0xc81c, 0x43eb, 0x1168, 0xe55f, 0x61d5, 0x4aee, 0x62bc, 0x8260, 0x3a65, 0x92e4, 0xb0d3,
    0x4e65, 0x58d6, 0x5da1, 0x71dd, 0x4689, 0x139d, 0x6fe3, 0xdb7c, 0xd3bb, 0x11b8, 0xde6d, 0x9d77, 0xb282, 0x9341, 0x539f, 0x1cc8,
    0xf80e, 0x860e, 0x2c49, 0xca30, 0x2bf1, 0x46ff, 0x0a11, 0x2cc4, 0x5ad3, 0xf7a4, 0x4676, 0xfbb8, 0xd84f, 0xeaca, 0x1cfd, 0x4b8e,
    0xa078, 0xd0ea, 0x12b0, 0x22ef, 0x6130, 0xacf6, 0x3374, 0xbd32, 0x7941, 0xfa56, 0x0834, 0xe9a0, 0x8584, 0x28dc, 0x09de, 0x28fe,
    0x2d66, 0xb5c0, 0xdcff, 0x1e22, 0x3838, 0xf4f4, 0x12f5, 0xa1e0, 0x4cec, 0xaf49, 0xab2f, 0x901e, 0x709f, 0x571c, 0x76e4, 0xe7a5,
    0xbd91, 0xf27c, 0x6c29, 0x0e3f, 0x631f, 0x8f30, 0x25ed, 0x9542, 0xd421, 0x4dfe, 0xf23f, 0x0fa9, 0xb01d, 0x5461, 0xadad, 0xa8a8,
    0x42f6, 0x5437, 0xf241, 0x80c1, 0xbf27, 0x486f, 0xa133, 0x8112, 0xaf79, 0x00fe, 0xa92d, 0xe9dc, 0x3e8c, 0xaa33, 0x98e6, 0x4185,
    0x3882, 0xa638, 0xa123, 0x8655, 0x52b1, 0xbf6a, 0xb314, 0x9683, 0xac1d, 0x6e1d, 0xd53b, 0x5b09, 0x53e0, 0x3e28, 0x5ab4, 0x0b1d,
    0x1212, 0x2121, 0x06ca, 0xde15, 0xfe0f, 0x129f, 0x4442, 0xf892, 0xd5a8, 0x2333, 0x7857, 0x1b28, 0xfec5, 0x35bb, 0xebde, 0x6643,
    0xf7f6, 0x472d, 0xaa1e, 0x8cc0, 0x6966, 0x64b4, 0x0bfc, 0x459c, 0xbdfd, 0x51cb, 0x8484, 0x4848, 0xef75, 0x21b3, 0xfb5f, 0x0040,
    0xc47e, 0xf12f, 0x67c2, 0xe1fa, 0xe21f, 0xd660, 0x4d57, 0xbaa5, 0xbe03, 0xa183, 0x281e, 0xb43a, 0xeb07, 0xfa91, 0x1786, 0x41a6,
    0x3eee, 0x919d, 0x3a68, 0x020d, 0x3462, 0x7202, 0x7b2f, 0xec56, 0x88d9, 0x31cf, 0x37ef, 0xb61c, 0x237d, 0xdb87, 0xa338, 0x8e67,
    0x63f6, 0xdd39, 0x59bd, 0x9020, 0xfbdf, 0xc97f, 0xb90e, 0xd51c, 0xc330, 0x1e78, 0x5a04, 0xfad0, 0x74dd, 0x0bcf, 0xc5ee, 0x1075,
    0xa0ac, 0xd064, 0xe64d, 0x9214, 0xccd2, 0x68c9, 0xbeb6, 0x22b5, 0x5b4f, 0x64a4, 0xf663, 0x39dd, 0x240b, 0x2696, 0x8dcd, 0x8143,
    0x4624, 0xdc6a, 0xbb21, 0xc34a, 0xeca5, 0xe021, 0x74d5, 0x5baa, 0x76a4, 0x7de1, 0xc06c, 0xf6d7, 0x01a9, 0x4070, 0x1644, 0xc8e1,
    0x87bb, 0x3883, 0x7c84, 0x6f85, 0xbc35, 0xdc7b, 0xd2fb, 0x74f3, 0xad89, 0x7274, 0x1b74, 0x4a88, 0xd237, 0x7db8, 0xba1e, 0x6f9e,
    0x7878, 0x6f6f, 0x8af4, 0xa7cd, 0xc74f, 0xebaa, 0x0300, 0xfc90, 0x1c57, 0x9f70, 0xfa2a, 0x024d, 0xfea6, 0xe2cf, 0x6ec9, 0x4740,
    0x942d, 0xa768, 0x4295, 0xed25, 0x2583, 0x6e32, 0xe030, 0xf88b, 0xe5c8, 0x34ca, 0xaeae, 0x0a0a, 0x8abf, 0x8578, 0x86df, 0xd152,
    0xac1f, 0xea47, 0x09a8, 0x03ea, 0xed6f, 0x6849, 0x35c8, 0x4d71, 0xcf21, 0x0a04, 0xc809, 0xd188, 0xc6dc, 0x5352, 0x60f8, 0x692a,
    0x5e18, 0x0699, 0xa541, 0x6a9a, 0xe195, 0x7d9b, 0xea8b, 0xd6ca, 0x4fa7, 0x90dc, 0xb15b, 0xecbd, 0x3c9e, 0x1720, 0xde96, 0xcb3e,
    0xa126, 0x54e4, 0xb818, 0x9d15, 0x8b9d, 0xd764, 0x43a0, 0x7fe7, 0x7cdb, 0xe36f, 0x88a9, 0xff8c, 0x2505, 0xf98f, 0x0775, 0x7757,
    0x86f5, 0x0dd6, 0x653a, 0x6082, 0x922a, 0x667e, 0x905d, 0xb350, 0x9fc6, 0xe739, 0x26a1, 0xe454, 0x5cca, 0xa3ba, 0xdbab, 0x8a74,
    0xafd9, 0xf6d6, 0x7454, 0x94e7, 0xa7d4, 0x7aea, 0xecb2, 0x1920, 0x680f, 0xe772, 0x6bd1, 0xf597, 0xa399, 0x5b72, 0x13d3, 0x3243,
    0x515e, 0x0e6f, 0xdb59, 0x4577, 0x32d4, 0x6972, 0xf869, 0x625e, 0xda8f, 0xc9cf, 0x2e64, 0xf7b5, 0xeebb, 0x8d3d, 0xb291, 0x0f37,
    0xed7f, 0x0100, 0x49f1, 0x4905, 0x6d55, 0xc547, 0xffb3, 0x221c, 0xe0bd, 0x7c63, 0xe24b, 0x1109, 0x1492, 0x4de6, 0x062e, 0x4567,
    0xbdd7, 0x86cc, 0x74c8, 0xfd4b, 0xce79, 0xf1a7, 0x781e, 0x30c3, 0x547a, 0xfb3d, 0x4a7c, 0xf83f, 0x4415, 0xc4c6, 0x556d, 0x47c5,
    0x365a, 0x8725, 0xb1f4, 0x7a16, 0xaf46, 0xf6f4, 0xa8b5, 0x27fb, 0x7490, 0xcd0d, 0x530a, 0x349f, 0x2400, 0x7ac4, 0x9a6b, 0xd5ff,
    0x3ac7, 0x0cf8, 0x71e9, 0xd427, 0xc9e4, 0x8dae, 0xe66f, 0x3166, 0xc796, 0x0b80, 0x2d11, 0xfefa, 0x572d, 0x60b6, 0x6dca, 0x92a4,
    0x6373, 0xe050, 0xb17b, 0x441d, 0x7474, 0x4747, 0xf89a, 0x0795, 0x8af8, 0xe26f, 0x8488, 0x25f1, 0x3323, 0xa8d5, 0xe26b, 0x1e54,
    0x3a88, 0xf762, 0x8ad8, 0xfb7f, 0xbbd9, 0xb92e, 0xc08c, 0x1eaa, 0x5a32, 0xb334, 0xf25f, 0xfef7, 0xae4b, 0x6ef6, 0xd1d1, 0x1d1d,
    0x3b56, 0x2028, 0x1f4b, 0xa167, 0xff4c, 0xd58a, 0x3381, 0x6f28, 0xd21b, 0xefc9, 0xafda, 0x54ac, 0x9eba, 0x29f5, 0x9a5c, 0x0cb5,
    0xa639, 0x5061, 0x16ad, 0x42c7, 0xc4f4, 0xcc90, 0x6ca4, 0xc3cd, 0x796c, 0xb800, 0xf044, 0x4d4a, 0xec2c, 0x1e70, 0x25d1, 0xb382,
    0xafe6, 0xb445, 0xdd75, 0x7c4e, 0x6568, 0xa631, 0x4e23, 0xa117, 0x1a3e, 0xa0a5, 0xcc0d, 0x4ef9, 0x22d3, 0x1ce4, 0xbb63, 0x7004,
    0xe61c, 0x74c1, 0x915f, 0x78ea, 0x5358, 0x196e, 0xa0c6, 0x7e06, 0x2ffa, 0xf703, 0x51af, 0x82da, 0xd083, 0x6a93, 0x4557, 0xe800,
    0x1904, 0x83cf, 0x402e, 0x3c79, 0x9101, 0x618a, 0xf8ca, 0x9b1e, 0xc84a, 0x6942, 0x1b61, 0xa525, 0x9589, 0xb41b, 0x0f5a, 0x6ecc,
    0x9866, 0xf3ea, 0x513e, 0x3e5c, 0x09e2, 0x7c88, 0xa8b9, 0x6bd5, 0x3b58, 0x3adc, 0x2fb0, 0x6b01, 0xecda, 0x545e, 0x6ef2, 0x1113,
    0x9f7d, 0x04b8, 0xd5fc, 0xb688, 0xc114, 0x56e5, 0x6952, 0xe4aa, 0xb258, 0xed35, 0x0b00, 0x8194, 0xba4f, 0xa5a3, 0xaf98, 0x4985,
    0x12c8, 0x6d2e, 0xa65a, 0xabc4, 0x4a56, 0x99e8, 0x402a, 0x77ed, 0x46a5, 0xa6e3, 0xaadc, 0x9822, 0xcb33, 0xb2e8, 0x79c1, 0x6446,
    0x9438, 0x2b22, 0x0471, 0x714c, 0x1b6c, 0x85d9, 0x6032, 0x8036, 0x4544, 0x80ec, 0xf849, 0x2dba, 0xce55, 0x7d0f, 0x57cf, 0x2aec,
    0x7b0e, 0x5cd9, 0x4024, 0xbbf7, 0xb50b, 0x719c, 0xe733, 0x047b, 0x36fb, 0x2bc3, 0x40d3, 0xeb8c, 0x7a1d, 0xf6ae, 0xcfc7, 0x340f,
    0x71f6, 0x2f67, 0xee9b, 0xb3f7, 0x24bb, 0x3309, 0x435d, 0x217a, 0xa664, 0x0487, 0x5a7d, 0xc627, 0xa82d, 0xf51a, 0x6786, 0xc1e5,
    0xbbf6, 0x2015, 0x55e2, 0x532d, 0x7255, 0x34a9, 0x5b44, 0x6afe, 0x3f03, 0x5063, 0x3c75, 0xc8af, 0xd08b, 0xa711, 0x3e27, 0xeeba,
    0x36bb, 0x1795, 0x3122, 0xe356, 0x229f, 0x91f7, 0x0c8d, 0x61f1, 0x2738, 0x4b04, 0xfb67, 0x9142, 0x8361, 0x07ab, 0x0f17, 0xc54f,
    0x5d3f, 0x5a76, 0x60de, 0xda0b, 0x9c92, 0xeeab, 0xdcf9, 0xcd4d, 0x7a35, 0xb7a7, 0xc7a6, 0x32be, 0xb023, 0xa51e, 0xc131, 0xae17,
    0xff04, 0xc0b2, 0x854b, 0x5531, 0xe7e6, 0xddc5, 0x31a0, 0x5b7e, 0xc51c, 0x9551, 0x6553, 0xb547, 0x7633, 0x6b20, 0xd4b9, 0x414e,
    0xe962, 0x4233, 0xee0b, 0xd4d7, 0xbaa8, 0xa2a9, 0xdee2, 0x08d0, 0x0d6e, 0x07d8, 0x2e44, 0xc45c, 0xc052, 0xd606, 0xc318, 0x9711,
    0x4c00, 0x6822, 0x5648, 0x2652, 0xe137, 0x3244, 0x93a3, 0x6c4d, 0x386e, 0xc8ad, 0xaecd, 0xe545, 0x3fb8, 0x6d15, 0x65d5, 0xf17f,
    0xaf8c, 0xe9b1, 0xae47, 0xb950, 0x5bc4, 0xfc17, 0xc9af, 0xba5e, 0x2fae, 0xf2c5, 0xa466, 0xf081, 0x05b3, 0xb96a, 0xcf12, 0x5ab5,
    0xfbec, 0x25c0, 0x83cb, 0xcf0c, 0xcb96, 0xd4ea, 0xea35, 0x505b, 0x3200, 0xec20, 0x13b3, 0x5d62, 0x795d, 0x0687, 0x5a48, 0x29fb,
    0x6f5d, 0x6511, 0x8c4f, 0xb4fa, 0xd384, 0x17e5, 0x090e, 0x4cc9, 0x23c5, 0x7c00, 0x5cb6, 0xa756, 0x9616, 0x70e2, 0xcc88, 0x2f38,
    0xa0d4, 0x0e5d, 0x21ed, 0x4038, 0x1bbe, 0xdef0, 0x5b52, 0xb9d3, 0x8939, 0x593a, 0xf6c4, 0x1451, 0x091c, 0x31c4, 0xe531, 0x5edc,
    0x234d, 0xb8e7, 0xe46c, 0xce33, 0xb1be, 0x6b93, 0xb6a1, 0x0dc4, 0x1584, 0xa72b, 0x33c6, 0x1d49, 0x54d2, 0xf0c1, 0xff01, 0xae7b,
    0xfa9e, 0xe469, 0x42f4, 0x86ba, 0x371d, 0x352a, 0x6612, 0x4976, 0x00ee, 0x80cd, 0x3978, 0x130d, 0xbf0e, 0x60e4, 0x9e7d, 0xfe5e,
    0x1dbc, 0x619e, 0x67ef, 0xdd37, 0x68ec, 0x0ce6, 0x5ece, 0xe3ec, 0xb8b1, 0x230b, 0x51f3, 0xa7a9, 0x1654, 0xa96c, 0x8713, 0xb0b4,
    0x09a6, 0xc09a, 0x782c, 0x63bc, 0xe03e, 0x90cb, 0xe29a, 0x906b, 0x6ff1, 0x91fe, 0xd1cd, 0x25fb, 0x7e88, 0xbec4, 0x0c0a, 0xf750,
    0xac43, 0x4903, 0x2016, 0x8b7c, 0xa690, 0x395b, 0x5148, 0xd9fa, 0x2e46, 0x504f, 0xb17d, 0x10ec, 0x83e4, 0x8301, 0xf577, 0x6f96,
    0x6ff0, 0x80eb, 0x1140, 0x4c0b, 0xbced, 0x5671, 0xe896, 0xf26a, 0x7596, 0xdd7f, 0x49bd, 0x0a9d, 0xb5ae, 0xd953, 0xecb1, 0x8111,
    0xe09b, 0xa626, 0x0c37, 0xe2a2, 0x4d54, 0xf467, 0xf6b6, 0x522e, 0xb880, 0x3d8f, 0x5425, 0xc292, 0x19ac, 0x2f03, 0x07fd, 0x316d,
    0x6fa6, 0x2794, 0xd90d, 0x1a56, 0xcdec, 0xff54, 0x1d19, 0xef7b, 0xe6b7, 0x96b8, 0xd790, 0x58c4, 0x82c1, 0xec45, 0x62e4, 0xf504,
    0xe51b, 0x8bd4, 0xd6a0, 0x5870, 0xc782, 0xc63b, 0x85fc, 0x52f2, 0x45ad, 0x3fd9, 0x7434, 0x50a0, 0x3ffe, 0xd0d8, 0x9b0f, 0xf0b0,
    0x0b2a, 0x54b6, 0xdc58, 0x9185, 0x5f87, 0x3072, 0x0077, 0xc066, 0x4b0b, 0x3871, 0x91e2, 0x3e00, 0xbcae, 0x8343, 0x1900, 0x7610,
    0xe599, 0x5974, 0xa352, 0xd371, 0xdd27, 0xd2d1, 0x592c, 0xf69a, 0xe841, 0xb549, 0x17fd, 0xfb81, 0x9169, 0x0e72, 0x0d1f, 0xd052,
    0x0fbe, 0x20e1, 0xa7b4, 0x8474, 0x13d4, 0x918b, 0x5442, 0xdba0, 0xbd7c, 0xeff2, 0xdf33, 0x9227, 0x2ab1, 0x4528, 0xf11d, 0x8173,
    0x6ae2, 0x7410, 0x16ed, 0x471b, 0x2860, 0xbdc8, 0x1276, 0x3b18, 0x210f, 0x3ccd, 0xfb92, 0x852f, 0x9524, 0x6e53, 0x0b1e, 0xef18,
    0x0876, 0xd8be, 0x37cb, 0xfabb, 0x92fd, 0xe8e6, 0x7ba8, 0x0605, 0x8ea4, 0x19e3, 0xd73d, 0xff80, 0x8a28, 0x7b62, 0x2f6e, 0xf298,
    0x75c6, 0xa069, 0x9a07, 0xe7e3, 0x16dd, 0xfc24, 0x1576, 0xabe7, 0xb580, 0x17d8, 0x8889, 0x3779, 0xd292, 0x8db0, 0x3766, 0x07ad,
    0xee15, 0x6edd, 0xfa97, 0xe990, 0x7a89, 0xf050, 0x0d99, 0x7baf, 0xcc9b, 0x2429, 0x5b3c, 0x0945, 0x4159, 0xa0c9, 0x20da, 0x6899,
    0x5f1f, 0x4a01, 0x6186, 0xf03c, 0xf0f5, 0x32f3, 0xe34f, 0x9cf3, 0x7d6d, 0x456a, 0xdd6e, 0x15ee, 0x99a5, 0xd192, 0x7a45, 0xe6d3,
    0x3fd7, 0x8fa3, 0x24e5, 0xc70f, 0x7cb0, 0x621a, 0x0ae8, 0x2ced, 0x3397, 0x76ef, 0xc240, 0x19a4, 0xfbce, 0xa69b, 0x7770, 0x3567,
    0x6a8d, 0x23c3, 0x87b3, 0xe74d, 0x428f, 0xd098, 0x1d3b, 0x206f, 0xc2d1, 0x47cc, 0xf25b, 0x5afe, 0x6b57, 0xd7e3, 0x9e6c, 0x1012,
    0x16f3, 0xf316, 0xf07f, 0x94f8, 0x205b, 0x26e5, 0xf67b, 0xa8f4, 0xecc7, 0x73ba, 0x1a72, 0x4c0c, 0xb69e, 0xc948, 0x7737, 0xddac,
    0x0cd9, 0x55e3, 0x8f8a, 0xaada, 0x9772, 0x8555, 0x898d, 0x882a, 0x1b9b, 0x0287, 0x0fe5, 0xe50f, 0x4816, 0x4d2c, 0xe4e1, 0x0d9b,
    0xf370, 0x291b, 0xd41a, 0x0e0b, 0x8898, 0x7793, 0xd744, 0xe1cb, 0xc320, 0x0095, 0xae51, 0x55a7, 0x1486, 0x307a, 0x726d, 0x37d6,
    0xea2f, 0x440a, 0x8ef5, 0x29a7, 0x61cf, 0x9b2b, 0xfef3, 0x0257, 0x4bd7, 0x35f9, 0xaea7, 0x7d4a, 0x1ad6, 0xd8e0, 0x8760, 0x8bed,
    0x3637, 0x0e05, 0xd2c4, 0x8164, 0xfca1, 0xa1fc, 0x5c8e, 0x4ca3, 0x7c2a, 0x3ddb, 0x4380, 0xaaa9, 0x8042, 0x3d6c, 0x47fe, 0xf521,
    0x6219, 0x04d2, 0xe4a9, 0x6611, 0x2a5a, 0xdbf0, 0xb9f2, 0xc3e1, 0x8f4a, 0x67bf, 0xff25, 0x7fef, 0xaf48, 0x7cda, 0xb025, 0x25b0,
    0xc657, 0xd8f4, 0x0a14, 0x8e86, 0x38b3, 0x366e, 0x86f2, 0x1338, 0xb3fd, 0xa148, 0x65fd, 0xf45a, 0xe307, 0x78fa, 0x5d0b, 0x7349,
    0x5794, 0x9bc3, 0x8ef8, 0xb9c0, 0xfdc7, 0xafa5, 0xf0b3, 0x53b2, 0x59e2, 0xab56, 0xc163, 0x1de3, 0x01e7, 0xcec2, 0x9cf5, 0x5652,
    0x4dd5, 0x074f, 0x8d49, 0xda6a, 0x081c, 0xfd90, 0x81a5, 0x5b73, 0xd412, 0x5e42, 0xd7c2, 0x42ba, 0xda79, 0xcee8, 0x8b3b, 0x097e,
    0x70bb, 0x3d34, 0xa106, 0x39c7, 0x962b, 0xc36d, 0xdde3, 0xdd97, 0xfd52, 0xbe98, 0xb219, 0xc6ab, 0xd9ee, 0x53e1, 0x90fd, 0x1c08,
    0xa20f, 0x7f94, 0x6e13, 0xa918, 0xd43f, 0xc973, 0xa29c, 0x262f, 0x8ec3, 0x0c67, 0xf640, 0x8862, 0x0855, 0xd24b, 0xb330, 0x0a4e,
    0x4dfb, 0x9996, 0xd845, 0x675d, 0x8b5d, 0x61ab, 0xb1b0, 0xd2a7, 0xf963, 0x45e2, 0xd599, 0x2223, 0x3a1c, 0x28a6, 0xd72a, 0x0576,
    0xceeb, 0xeea5, 0x920a, 0x93e2, 0x0b2d, 0x2d0b, 0x0200, 0xdaff, 0xb37a, 0x2041, 0x1e65, 0x353a, 0xc7ec, 0xba73, 0xc1cc, 0x8921,
    0x4e01, 0x5325, 0x4438, 0xff67, 0xa783, 0xeaa6, 0x8a8f, 0xdaaa, 0x721d, 0xaa39, 0x4aa3, 0x2426, 0xf7bf, 0x92ff, 0x812d, 0x2d81,
    0xd621, 0xa481, 0x5348, 0x9cad, 0x04d3, 0x604d, 0x701f, 0xc865, 0x91a6, 0xdc73, 0x58df, 0xb5c9, 0x506a, 0x872e, 0x0ddf, 0x6f78,
    0x3d87, 0xae6c, 0xda85, 0x38ce, 0x4a1c, 0x1591, 0x0db6, 0xc2ec, 0x4c33, 0x79f5, 0x04f1, 0x3e44, 0x0c82, 0xc1e7, 0xc880, 0x30c5,
    0x30aa, 0x0ed8, 0x2212, 0xc497, 0x4eb4, 0x376d, 0xf8c6, 0xc17b, 0xb408, 0xf5a1, 0x1141, 0xbd09, 0x8661, 0x3cf0, 0xf4a1, 0x349c,
    0x532e, 0x0ee1, 0x8ace, 0x0c5c, 0x55ec, 0x6ee6, 0x9bcc, 0x2924, 0x8bdd, 0x20ea, 0x651a, 0xe472, 0xe9ba, 0x179e, 0x6d37, 0xb44e,
    0xbd63, 0x69ca, 0xae1f, 0x267c, 0xa2f2, 0x66d7, 0x84f2, 0xcdf4, 0x009d, 0x9b7a, 0x77a3, 0x312c, 0x3b2d, 0x9fae, 0x3f47, 0xe392,
    0x641f, 0x8ac5, 0x9fa6, 0x1f29, 0x3dab, 0x4c18, 0xe45e, 0x3014, 0xf31c, 0x988d, 0x2540, 0xc830, 0xfc26, 0x8648, 0x827a, 0x7231,
    0xc87f, 0x1011, 0x1653, 0xb2e7, 0x4312, 0x9983, 0x4f68, 0x8e35, 0xe3dd, 0x97dd, 0x9b1a, 0xbc41, 0x6539, 0x0e3e, 0xfe1a, 0x6c5e,
    0x3f77, 0x35d0, 0x79da, 0xe8ce, 0x28e4, 0x5901, 0x3a31, 0xa5e3, 0x4f25, 0x8b30, 0x1110, 0x7fc8, 0x823f, 0x1961, 0xe434, 0x1898,
    0x880c, 0x0c53, 0x5a2e, 0xff96, 0x9a0e, 0x8340, 0xd6fc, 0xd712, 0x684d, 0xefcd, 0xdb8b, 0xa63c, 0xd673, 0x4959, 0x87a2, 0xcb49,
    0x093f, 0xb745, 0x799e, 0xb68e, 0x99db, 0xdf40, 0xb8d9, 0xcce2, 0xf12d, 0x2045, 0x4d30, 0x04d6, 0xa2ad, 0xf707, 0x60e8, 0x80ef,
    0xde62, 0x62de, 0x01db, 0x4615, 0xffe0, 0xf129, 0xa39a, 0x21d7, 0x4280, 0x6c3d, 0xacc5, 0xb816, 0x6e6b, 0x34b0, 0xa1b5, 0x6146,
    0x755d, 0xe9f8, 0xf2b9, 0xe1c3, 0x22e2, 0x2a97, 0xca62, 0x5cf6, 0x2f51, 0x1e0a, 0xa165, 0x65a1, 0x3e29, 0x20a9, 0xffb5, 0x0004,
    0xc20a, 0x95d3, 0x5c2f, 0x8263, 0xe96e, 0x1d9f, 0x4a3d, 0x6047, 0x163c, 0xde31, 0x105f, 0x86af, 0x2a49, 0xdca6, 0x34f7, 0x46f3,
    0xab58, 0x1138, 0x657c, 0x8f4d, 0xb991, 0xa383, 0x6f4f, 0xf46a, 0xf725, 0x0a5f, 0x0ebd, 0x577b, 0x421e, 0x799a, 0x4d19, 0x1fdd,
    0xd375, 0x2f3c, 0x8198, 0x217e, 0xda6e, 0x689d, 0xe476, 0xa5e7, 0xb205, 0x526e, 0xa325, 0x334b, 0xfafa, 0x5252, 0xcda7, 0xf48a,
    0x17bb, 0x41d4, 0x1e4e, 0xb0d9, 0xca34, 0xc8e5, 0xfefe, 0x6262, 0xaa8a, 0xb199, 0x8ad4, 0xfada, 0x1f63, 0x308f, 0x2bdc, 0xbadd,
    0x5d82, 0xbd00, 0x9a9b, 0xb9f3, 0x358c, 0x6fb6, 0xdd57, 0x3925, 0x24ec, 0x7630, 0x8494, 0x5c81, 0x50c0, 0x7b91, 0xfc70, 0x524e,
    0x24ce, 0xc56f, 0xb417, 0xc1bc, 0xc47c, 0x1c2d, 0xb4ec, 0xba7e, 0x2dda, 0x8e36, 0xd338, 0xe4ca, 0xd5c4, 0xe820, 0x3e7c, 0x55bf,
    0xabd8, 0xddcc, 0xc72f, 0xa305, 0x3799, 0x5248, 0x8946, 0x9d13, 0xaac9, 0xff44, 0x65e6, 0xe1eb, 0x491f, 0x5672, 0x39e7, 0xc69f,
    0xa65c, 0x1dc2, 0x88ab, 0x21f7, 0x159d, 0x18b8, 0x1f49, 0x7256, 0x18c2, 0x0a6e, 0x9402, 0xbe3e, 0xe492, 0xd3b0, 0xe079, 0xc30c,
    0xe87a, 0xbe79, 0xaeb6, 0xfaf6, 0xb97e, 0x7302, 0x3752, 0x6fc0, 0xbb15, 0xdecb, 0x6ea9, 0xd355, 0x8c59, 0xf99b, 0xc9fe, 0x6a2d,
    0x48df, 0xf6e1, 0xfac1, 0x7ea4, 0x55cb, 0x982d, 0x0900, 0x1eb1, 0x0430, 0x0d8c, 0x8087, 0xb297, 0x9fc3, 0x5033, 0x9585, 0x0f00,
    0x2098, 0x4e99, 0xaca0, 0x64d0, 0xbfa9, 0xf8b3, 0xe2af, 0x215e, 0xce1a, 0xaa79, 0xc6c4, 0x1544, 0xedef, 0x5a8e, 0x5198, 0x6d68,
    0x1c22, 0xb3ff, 0x1ace, 0x79aa, 0xb888, 0xa5ca, 0x5d72, 0xb377, 0x045a, 0xd0fa, 0x36df, 0xdbf8, 0x3f24, 0x00c0, 0xfe22, 0x380c,
    0x9558, 0x2294, 0x5ebe, 0x77f9, 0x4a92, 0xb729, 0x9087, 0x9e66, 0xc160, 0xf622, 0xf35b, 0x4b5c, 0x1fff, 0x686c, 0xa2d6, 0x9fec,
    0x1fdc, 0xb68a, 0x1c37, 0xe456, 0x82d9, 0x5cb5, 0x17d7, 0xf962, 0xc1b0, 0x83d5, 0x139c, 0x2582, 0xd811, 0x528f, 0xbd1a, 0xdbd3,
    0x1129, 0xf598, 0x5778, 0x281b, 0x1703, 0xb3a2, 0xfb9f, 0x43c4, 0x9999, 0x7777, 0x9507, 0x9af8, 0xecdd, 0x975c, 0x8857, 0xf8ab,
    0xf66e, 0x4bae, 0xcccc, 0xbbbb, 0x0fc9, 0x0030, 0xfb7b, 0x96a3, 0xf6f7, 0x2d47, 0x670d, 0xd53c, 0x1f92, 0x0060, 0x022d, 0x687d,
    0x5fd2, 0x3493, 0x8a9f, 0x1e2e, 0x8215, 0xb3ed, 0x0f56, 0x06c3, 0xe23b, 0x02e7, 0xf262, 0xca29, 0x5562, 0x8a50, 0x4e87, 0xbaf0,
    0x628a, 0xc3a1, 0x2285, 0xf6cf, 0x43be, 0xded8, 0x9608, 0x4e70, 0xbe67, 0x244f, 0xf4a4, 0xcda3, 0x7af9, 0xdfe5, 0xb68b, 0x636c,
    0x0cc3, 0x79e0, 0xf586, 0xd60d, 0xe943, 0x6938, 0x3251, 0x7836, 0x107b, 0x4b9c, 0x4193, 0x82b2, 0xc8ef, 0xa376, 0xd132, 0x41b4,
    0x6811, 0xeb43, 0x7b10, 0x9c4b, 0x2282, 0x7a13, 0x9bf3, 0xd563, 0xa988, 0x8cff, 0x4852, 0x9937, 0xcad5, 0x01f3, 0x128a, 0xb678,
    0x95c1, 0xcab6, 0xc3e2, 0x191a, 0x1c20, 0xf690, 0x23ef, 0x453e, 0xa884, 0xb741, 0xf279, 0x1126, 0x27a8, 0x2317, 0xc2b3, 0x8840,
    0xb2f8, 0xf498, 0xc6ad, 0x6244, 0xf8b9, 0x1136, 0x2f2a, 0x6d76, 0x4f69, 0x08e9, 0xae8e, 0xca14, 0x1f7c, 0x41c2, 0x1b40, 0x1930,
    0x9d68, 0x6eda, 0x2afa, 0x4d02, 0xf18d, 0x82f7, 0xa83a, 0xc55d, 0x8181, 0xe6e6, 0xe0a1, 0xf512, 0xbcee, 0x5eea, 0xf75e, 0x1b32,
    0x6154, 0x1db0, 0x2020, 0x6c6c, 0x4424, 0x892f, 0x34aa, 0x6242, 0x2d94, 0x68a7, 0xddba, 0xdc2b, 0x098c, 0x95ef, 0xd321, 0xf52f,
    0x6dd0, 0x2a21, 0x423a, 0x53da, 0x1d8c, 0x093b, 0xa38d, 0x8b76, 0xf7bd, 0x8e8c, 0x0d2b, 0xec86, 0x2979, 0x42fe, 0x2c38, 0x6b50,
    0xb626, 0xc9d1, 0x1329, 0x2b24, 0x5d2f, 0xe4d7, 0x5ca8, 0xd723, 0xb0f8, 0x8646, 0x71ab, 0x1891, 0xe6a6, 0xee7c, 0xed05, 0x306f,
    0xd3f8, 0x3ce7, 0x3a84, 0xc9bf, 0x98f5, 0x2911, 0x6be2, 0x541e, 0x2a0f, 0x35f1, 0xe4df, 0x1d42, 0x3333, 0xeeee, 0x15de, 0xca06,
    0x21e2, 0xfdcf, 0x940d, 0x2bbc, 0xcb51, 0xfdbd, 0xdddd, 0x6666, 0x10af, 0xf157, 0x3268, 0x5650, 0xd9bb, 0x2eb9, 0x3cd5, 0x0d67,
    0x8214, 0x1d9e, 0x6828, 0x76cc, 0xfbeb, 0xb444, 0x6e12, 0xfaba, 0x1f21, 0x5be1, 0x6ec8, 0xb0d2, 0x45ab, 0xd0b1, 0xc7d2, 0xe859,
    0x1c9d, 0x6b62, 0x5f78, 0x1da9, 0x2e00, 0x1e5b, 0x7bf2, 0xf486, 0x67f9, 0xdf99, 0xb8c5, 0x1a21, 0xcaa4, 0x7bfe, 0xd968, 0x1c96,
    0x6bd2, 0x133b, 0x937f, 0x7508, 0xf8db, 0xdf36, 0x79ce, 0xa7f1, 0xaef0, 0x5036, 0xe010, 0xaa6a, 0x2252, 0xeb31, 0xa464, 0x4f5b,
    0x3481, 0x8658, 0xa83c, 0xd7c4, 0x2090, 0xbd59, 0x5222, 0x31eb, 0xf73f, 0x8788, 0x5b0a, 0xc38f, 0x2e06, 0x6745, 0x994e, 0x9820,
    0x8feb, 0xd387, 0x6de7, 0x8ab3, 0x766c, 0x456d, 0x140b, 0x76cd, 0x69b8, 0x7705, 0xfa42, 0x0beb, 0xa10c, 0xa308, 0x47a4, 0x02d8,
    0x6d4f, 0x335d, 0x4f87, 0x6f2f, 0xc621, 0x35be, 0x31f2, 0x27cb, 0x27f8, 0x9605, 0x4ad7, 0xb088, 0xe28d, 0x1c38, 0x0fff, 0x6858,
    0x06b3, 0xff10, 0xa84f, 0xe3d2, 0x0c41, 0xb32a, 0x19f0, 0x758e, 0xf908, 0xdf0a, 0xef62, 0xa321, 0x0f77, 0x7106, 0x81be, 0xb733,
    0x5ff9, 0x30a1, 0x62cc, 0xccdf, 0x5fd4, 0x1488, 0x1b5d, 0x93c9, 0xa5f7, 0xe9e6, 0x4101, 0xb1da, 0x786b, 0xb8f7, 0xec9d, 0xa363,
    0x0595, 0x2a5b, 0xafc3, 0x1839, 0xf2cc, 0x2cba, 0xee93, 0xe968, 0x37f8, 0xc075, 0xde76, 0xab38, 0xf04d, 0x5313, 0x26aa, 0xfa33,
    0x7f82, 0x6059, 0x73f3, 0xeee2, 0x74b1, 0xa119, 0x5d54, 0xd154, 0x38fb, 0x97b3, 0x925d, 0x9984, 0x5dfb, 0x900a, 0xb92a, 0x9a54,
    0x410a, 0x0ecf, 0xfdf5, 0x5a22, 0x8e4e, 0x35b1, 0x1700, 0x8f2d, 0x36e8, 0x9510, 0x0ec6, 0x849d, 0x5b13, 0xe4e8, 0xae97, 0xf26b,
    0x4aac, 0x114a, 0x2549, 0xdb94, 0x0fee, 0x5b45, 0xc16c, 0xae5a, 0x743d, 0xdf3c, 0x5cbf, 0x3981, 0xa46f, 0xfb70, 0xaae5, 0xcc16,
    0xc0cf, 0x18d4, 0x073d, 0x895b, 0xfeeb, 0xb3ac, 0xfd02, 0x6366, 0x16c0, 0x3d22, 0x327f, 0x2080, 0x7ed7, 0x02a4, 0xd6aa, 0x0a3f,
    0xd1b9, 0x2209, 0xbbd5, 0x9028, 0xd8e2, 0xc3a3, 0x5a3a, 0xa4fb, 0x1efd, 0x7c97, 0xfdec, 0xa6fb, 0x3d44, 0x1685, 0x0359, 0x9bb1,
    0x51fb, 0x39f9, 0xe175, 0x0e9d, 0x2682, 0x04c0, 0x1df0, 0x1d0c, 0xa3c6, 0xd464, 0x8669, 0x3eaf, 0x7056, 0xba24, 0x0df3, 0x8832,
    0xb611, 0x525a, 0x54b3, 0x43f8, 0x9bfb, 0x99d7, 0xfde6, 0xc396, 0x2909, 0x02b9, 0x1b85, 0xb090, 0xd4f5, 0xa94f, 0x1f08, 0x6a46,
    0xcc3e, 0xc48e, 0x031a, 0xe5b7, 0x5956, 0x73aa, 0x0fb3, 0x23b1, 0xd178, 0x3bc9, 0x5a19, 0x8c69, 0x8f91, 0x3e59, 0x5435, 0x22c4,
    0x003a, 0x55d1, 0x1873, 0x63a9, 0xe095, 0x538a, 0x0679, 0x1fbd, 0x2c05, 0x6d60, 0xf304, 0xd917, 0x45f6, 0xc13c, 0x537d, 0x63f4,
    0xd8ac, 0x9aad, 0x3735, 0xe773, 0xc967, 0xfc1e, 0xe4b6, 0x3347, 0x87ea, 0x355c, 0x2b69, 0xa057, 0x03e8, 0x5fac, 0xed72, 0x279a,
    0xdf09, 0x7642, 0x334a, 0x4192, 0xa0c8, 0xc7eb, 0x6ecb, 0xe530, 0x860d, 0xac1e, 0xa521, 0x41fe, 0xa6b5, 0x49ef, 0x6422, 0x5638,
    0x1f00, 0x48f1, 0x3b08, 0x0c80, 0xfdc0, 0x8bfe, 0x6829, 0x868f, 0x854e, 0xa4de, 0xc088, 0xf658, 0x6149, 0xaa12, 0x98b6, 0x83fe,
    0xdaa3, 0xb2a9, 0x20a7, 0xea5c, 0x622e, 0x1722, 0xcb88, 0x618c, 0xe313, 0xad3e, 0xe0f2, 0x33c3, 0xe457, 0x9e3a, 0x775d, 0x9f13,
    0x5869, 0x3764, 0xf42c, 0x63e9, 0x8d10, 0xdc62, 0x0e4b, 0x6cb4, 0x7643, 0x8695, 0x35a8, 0x161c, 0x8c48, 0xb8d5, 0x9837, 0xf682,
    0x25ae, 0xf9ad, 0x4ff6, 0x516b, 0x12c1, 0x09ce, 0xede9, 0x5e8d, 0xe9aa, 0xb754, 0xb516, 0x64ff, 0xd94b, 0xc043, 0x0780, 0xcac2,
    0xdbf1, 0x3f36, 0x81e1, 0xb3d9, 0x54a4, 0xab9b, 0x698b, 0xe83f, 0x5c70, 0x33b0, 0x1205, 0xb77a, 0x0eb6, 0x13ff, 0x7702, 0x5962,
    0x44b6, 0xb389, 0x20cf, 0xa3f7, 0x4f62, 0xf604, 0x504d, 0x2c16, 0x8781, 0x73fe, 0x4313, 0x761b, 0xe622, 0x2172, 0x03ca, 0xdc86,
    0x9a30, 0xc6d6, 0x693e, 0xa614, 0xc519, 0x3c73, 0x9a1b, 0xe920, 0x80d9, 0xedaf, 0x9396, 0x450f, 0xed48, 0xfbc2, 0xe897, 0x23e1,
    0xa35c, 0x4eab, 0xabff, 0x34d7, 0x6aff, 0x8bc2, 0xf588, 0x4800, 0x2c88, 0x91c3, 0x8e45, 0x730c, 0x0352, 0x80e0, 0x2782, 0x526a,
    0xb433, 0xc172, 0xaf5c, 0x7529, 0xa5d4, 0x72bd, 0x0114, 0xb4c0, 0x1845, 0x0865, 0x8f24, 0x74af, 0x4ae7, 0x27e3, 0x1a79, 0xa7be,
    0xd506, 0x780b, 0x9d81, 0xe382, 0x7cd4, 0xea69, 0x83bd, 0x0ab6, 0xefc2, 0x67ca, 0xc7e9, 0xe94e, 0x0b88, 0xf3d8, 0x0bbf, 0x299f,
    0xd253, 0xbd2c, 0xbcc4, 0xd3f0, 0xc59e, 0x157e, 0xb45b, 0x6d1c, 0xf5f7, 0xcb86, 0x1d51, 0x716e, 0x04a6, 0xa42e, 0xc846, 0x190c,
    0xeb2e, 0x5cc7, 0x8623, 0xb201, 0xc6de, 0x3f8c, 0x09e4, 0x6027, 0x6025, 0xde45, 0x2b10, 0x50c8, 0xcbbf, 0xf2f5, 0x6d7e, 0x9cb3,
    0xb861, 0x1715, 0xc6bc, 0x5c0f, 0x9c83, 0x5a64, 0x1ea6, 0x62c6, 0x4fab, 0xc4f8, 0xc482, 0x3e90, 0x310e, 0xadf1, 0x1783, 0x1fda,
    0xb0fc, 0xf8bd, 0xc20e, 0x2003, 0xa3ca, 0x8e52, 0x25b2, 0x9c4d, 0x2f55, 0xa787, 0x16f7, 0x8046, 0xc520, 0x656c, 0x1dc0, 0x19b0,
    0x4ff5, 0xccde, 0x6810, 0x41d3, 0x8a8e, 0x9cf2, 0xb1bd, 0x7c87, 0xb15a, 0xe99f, 0x559b, 0x7f5b, 0x9e01, 0x1327, 0x690a, 0x95b3,
    0x42ce, 0x2d59, 0x8fd8, 0x25fe, 0xc0a0, 0x750f, 0x6660, 0x0aeb, 0x6e1e, 0x2365, 0x0f0b, 0xf9b0, 0x9c49, 0xdf8a, 0x9885, 0x4221,
    0xefe1, 0x6221, 0xb885, 0xc819, 0xbc49, 0x26c6, 0x2218, 0xff8a, 0x8e1e, 0x0f66, 0xfd8a, 0x4365, 0xe62c, 0x19b1, 0x2f0b, 0x1cce,
    0x62ce, 0x9b11, 0x80b0, 0x4d59, 0xafff, 0x45fe, 0xafd8, 0x5436, 0x0c09, 0x2aeb, 0x8660, 0xc947, 0xe0a0, 0xe1ea, 0x80d8, 0x950f,
    0x6ff5, 0xcdf0, 0xaf90, 0xecde, 0xc2d5, 0x61d3, 0x8810, 0x0859, 0x8552, 0x9c87, 0xd1bd, 0x5dff, 0xaa8e, 0x0fcd, 0xd3fc, 0xbcf2,
    0x9353, 0xb5b3, 0x890a, 0x973e, 0xbe01, 0x6323, 0x787c, 0x3327, 0xd15a, 0x6746, 0x1bdf, 0x09a0, 0xb4bc, 0x9f5b, 0x759b, 0x417f,
    0xd861, 0xbc38, 0xc585, 0x3715, 0x7e57, 0x7c0f, 0xe6bc, 0xe1a1, 0xe8b4, 0x82c6, 0x3ea6, 0x2739, 0xbc83, 0xfaa4, 0x1421, 0x7a64,
    0x2cd6, 0x3fda, 0x3783, 0xb781, 0x510e, 0xbec7, 0x7c40, 0xcdf1, 0x6fab, 0x0ec0, 0x5acb, 0xe4f8, 0x7ad7, 0x5e90, 0xe482, 0x0caa,
    0x0846, 0x39b0, 0x3dc0, 0xf388, 0xe520, 0xc831, 0xbf81, 0x856c, 0x4f55, 0xa243, 0x7332, 0xc787, 0xf416, 0xa046, 0x36f7, 0x9a8d,
    0xd0fc, 0xeaa8, 0x828e, 0x18be, 0xdb19, 0x4003, 0xe20e, 0x5590, 0x8029, 0xbc4d, 0x45b2, 0x8b03, 0xc3ca, 0x23ec, 0x26b7, 0xae52,
    0xd433, 0x3d7f, 0xf168, 0xe172, 0xb147, 0x9529, 0xcf5c, 0xa037, 0xa02d, 0xd4c0, 0x2114, 0x647a, 0xc5d4, 0x3606, 0x0664, 0x92bd,
    0x0e51, 0xc7be, 0x3a79, 0xb651, 0x6ae7, 0xe554, 0x4e15, 0x47e3, 0x3845, 0x4ea5, 0xb5eb, 0x2865, 0xc0e7, 0x94af, 0xaf24, 0x912b,
    0x76f6, 0x499f, 0x2bbf, 0x07be, 0x2b88, 0x3c62, 0x035c, 0x13d9, 0x0fc3, 0x7149, 0x6c40, 0x87ca, 0x36aa, 0x094f, 0xe7e9, 0x3917,
    0xf506, 0xe3d4, 0xec58, 0x980b, 0x4476, 0x0383, 0xbd81, 0x81f6, 0x801f, 0x2ab6, 0xa3bd, 0xd835, 0x9cd4, 0xa2fd, 0xc7f8, 0x0a6a,
    0x52c3, 0xbcb3, 0x8d7e, 0x61e4, 0xebbf, 0xba37, 0xd9a7, 0x12f6, 0x8025, 0x0e29, 0xffaf, 0xfe45, 0xd9e3, 0x70c8, 0x4b10, 0x765c,
    0x0b2f, 0xce1c, 0x384f, 0x7cc7, 0xa441, 0xd201, 0xa623, 0xf213, 0xead7, 0x8027, 0x29e4, 0x821b, 0xe6de, 0xb351, 0x3a8f, 0x5f8c,
    0xf253, 0x97d4, 0xfa10, 0xdd2c, 0xc18f, 0xf3f0, 0xdcc4, 0x5aa1, 0xef93, 0x8d1c, 0xd45b, 0x5089, 0xe59e, 0x84ee, 0xe7bc, 0x357e,
    0x0110, 0x390c, 0xe846, 0xed52, 0x24a6, 0x6a1d, 0xef01, 0xc42e, 0x15f8, 0x3424, 0xeefe, 0xeb86, 0x44b3, 0x916e, 0x3d51, 0x32ce,
    0x3f00, 0x6c55, 0x72e1, 0x68f1, 0x952c, 0x2c80, 0x5b08, 0x2e63, 0x719b, 0xa68f, 0x8829, 0x9bcb, 0x1dc1, 0x6153, 0xdb93, 0xabfe,
    0xb62e, 0xa3fe, 0xb8b6, 0x4334, 0x8149, 0xd35d, 0x22c5, 0xca12, 0xa54e, 0x4538, 0xb463, 0xc4de, 0xd54c, 0x1659, 0xe088, 0xa957,
    0x4d69, 0xbf13, 0x975d, 0xa501, 0x0458, 0x303f, 0x0d50, 0xbe3a, 0x0314, 0x76c1, 0x97b0, 0xcd3e, 0x1602, 0x53c3, 0x00f3, 0x7b83,
    0xfaa3, 0x3c12, 0xb299, 0xd2a9, 0x48cb, 0x0a5d, 0x40a7, 0x4877, 0x2e07, 0x818c, 0xeb88, 0xc378, 0x822e, 0x747b, 0x7536, 0x3722,
    0xef87, 0xeac2, 0x2780, 0xd7ea, 0xf94b, 0xd997, 0x05f5, 0xe043, 0x09ab, 0xb716, 0x4b05, 0xd754, 0x3c13, 0x84ff, 0xd516, 0x9ae1,
    0x45ae, 0xfe11, 0x6d51, 0x19ae, 0x9ab0, 0x716b, 0x6ff6, 0x5618, 0xe461, 0x7e8d, 0x0dea, 0xa9c7, 0x32c1, 0xca71, 0xb6b2, 0x29ce,
    0x7869, 0x991f, 0x122a, 0x5764, 0x2541, 0x83e9, 0x142d, 0xef6e, 0xa5d0, 0x8cb4, 0x2e4b, 0x28d5, 0xad10, 0xb49e, 0xd479, 0xfc62,
    0x2133, 0x1683, 0xb837, 0x0f30, 0xac48, 0xa2ee, 0x6fcf, 0xd8d5, 0x9643, 0xef9d, 0xf4dc, 0xa695, 0xa81d, 0x361c, 0x55a8, 0xd1ca,
    0x76b6, 0x726a, 0x4782, 0x7f54, 0x2352, 0x1185, 0xeae1, 0xa0e0, 0x4c88, 0xa9fa, 0xd4d1, 0xb1c3, 0xd1f2, 0x930c, 0xae45, 0x11fe,
    0xc35c, 0xeafd, 0xa29e, 0x6eab, 0x054b, 0x54d7, 0xcbff, 0x69b1, 0x3b63, 0x6800, 0x1589, 0xd45d, 0x8aff, 0x1822, 0xc543, 0xabc2,
    0xba30, 0x0e35, 0xbdaa, 0xe6d6, 0x72b9, 0xc614, 0x893e, 0x8c52, 0x012d, 0x0921, 0xba1b, 0x524b, 0xe519, 0x3d09, 0xcc32, 0x5c73,
    0xdc8d, 0x43e1, 0x0898, 0x1b2b, 0x0d49, 0xb9c6, 0x4657, 0x1bc3, 0xa0d9, 0x66d3, 0x0a28, 0x0db0, 0x9a71, 0x650f, 0xb396, 0xc7cb,
    0xfbf1, 0x7aba, 0xa08f, 0x5f36, 0x9328, 0xd3d9, 0xa1e1, 0xbce6, 0x9b3f, 0x0840, 0x898b, 0xdee9, 0x74a4, 0x4a29, 0x2988, 0xcb9b,
    0x1087, 0x7962, 0x9702, 0x802f, 0x2eb6, 0xfea3, 0xa097, 0x33ff, 0x7c70, 0xd5be, 0xc91e, 0x53b0, 0x905e, 0xd77a, 0x3205, 0x3199,
    0xe65f, 0xfc86, 0x23ca, 0xda63, 0x0623, 0x53f0, 0x5506, 0x4172, 0xa781, 0xa3e0, 0x6622, 0x93fe, 0x3516, 0x961b, 0x6313, 0x24de,
    0x64b6, 0x6530, 0xd955, 0xd389, 0x6175, 0xc3f7, 0x40cf, 0xa208, 0x2e97, 0x4c16, 0x704d, 0x100a, 0x6f62, 0x31da, 0xe9b7, 0x1605,
    0xafeb, 0x1007, 0x1229, 0xf387, 0x8c06, 0xaab3, 0x8de7, 0x9007, 0x2892, 0x96cd, 0x340b, 0xb20d, 0x966c, 0xcf19, 0x9c53, 0x656d,
    0xf5a9, 0x22d8, 0x67a4, 0x4d97, 0xc10c, 0x8f92, 0x2fec, 0xc308, 0x89b8, 0x144b, 0xb0bc, 0x9705, 0x1d7b, 0x2beb, 0x1a43, 0xc11c,
    0xf87b, 0x8858, 0x2fff, 0xa6c5, 0x028e, 0x7388, 0xacd5, 0x3c38, 0x47f8, 0xb916, 0x40e7, 0xb605, 0x6efe, 0xd088, 0x6ad7, 0x8e28,
    0x8d4f, 0xc876, 0x152c, 0x535d, 0x9229, 0x8f2f, 0x6f87, 0x7e11, 0x4c32, 0x47cb, 0x51f2, 0x9821, 0xe621, 0x9009, 0x1b3f, 0x55be,
    0x2517, 0xc363, 0x0c9e, 0x2ab4, 0x986b, 0xbd5f, 0x21ca, 0xd8f7, 0xc5f7, 0xfb68, 0x98ef, 0x09e7, 0x0637, 0xd1da, 0x6101, 0xb29a,
    0x7ff9, 0x362d, 0x0c07, 0x50a1, 0x30ac, 0xecdf, 0x82cc, 0xbf6d, 0xb42f, 0xb3c9, 0x3b5d, 0x9e0b, 0x7fd4, 0xc5d6, 0x3a40, 0x3488,
    0x26b3, 0x1008, 0xed7b, 0x1f11, 0x98bf, 0x03d3, 0xc84f, 0x988e, 0xa2df, 0x958e, 0x39f0, 0x2be5, 0x2c41, 0xd971, 0xd13b, 0xd32a,
    0x0de8, 0xd733, 0xa1be, 0xe43d, 0x2f77, 0x9e75, 0x4807, 0x9106, 0x1909, 0x0806, 0x0c13, 0xff0a, 0x678f, 0xc321, 0x0f63, 0xcfd0,
    0x4fb9, 0xec16, 0xcae5, 0x1853, 0xc46f, 0x855c, 0x5c7e, 0x1b71, 0x943d, 0x69c6, 0x3806, 0xff3c, 0xd186, 0x5981, 0x7cbf, 0x16ce,
    0x6aac, 0x164a, 0x24fa, 0x314a, 0xc16e, 0xfb94, 0x4549, 0xbb23, 0x1f2f, 0xce5a, 0xe16c, 0xf7cb, 0x2fee, 0xe249, 0xa892, 0x7b45,
    0x610a, 0x1a4c, 0xb266, 0x2ecf, 0xc52a, 0x7a22, 0x1df6, 0xa672, 0x4b19, 0xaf2d, 0x3700, 0x75a4, 0xae4e, 0x320e, 0x00fc, 0x55b1,
    0x685b, 0x126c, 0xce97, 0x00ab, 0x7b13, 0x8ed1, 0x91b4, 0x04e9, 0x56e8, 0x8eb2, 0x33a5, 0xb510, 0xb40b, 0xa49d, 0x2ec6, 0xc32e,
    0x2595, 0xb2de, 0x5e61, 0x4a5b, 0x136d, 0x3839, 0xcfc3, 0x063f, 0x9927, 0x0969, 0x0e94, 0x4f1a, 0x12cd, 0x45ba, 0xbabc, 0x4cba,
    0xd164, 0x1a34, 0x46aa, 0x8bda, 0x104e, 0xa491, 0x6a85, 0x7313, 0x57f8, 0x9860, 0x166d, 0xe075, 0xf544, 0xcb38, 0xfe76, 0x667f,
    0x8b06, 0xba54, 0xd92a, 0xe0cb, 0x7dfb, 0x1c65, 0x7ce9, 0xb00a, 0x58fb, 0xe56d, 0x4cfa, 0xb7b3, 0xc33e, 0xb984, 0xb25d, 0xd5b6,
    0x9f82, 0x3118, 0xeb1e, 0x8059, 0x0062, 0x0ee3, 0x93f3, 0x1f9d, 0x1c54, 0xf154, 0x7d54, 0x9ec1, 0x94b1, 0xdaf2, 0x2e0d, 0xc119,
    0x3a9a, 0x7638, 0x8422, 0x4c8f, 0xc6b5, 0x55e0, 0x75aa, 0x69ef, 0xa60d, 0xadcc, 0x3d1c, 0xcc1e, 0x7525, 0x61fe, 0xc521, 0x04b0,
    0xff09, 0x2678, 0xbc4c, 0x9642, 0x3e5a, 0x6192, 0x534a, 0xa2d8, 0x7973, 0x0531, 0x8ecb, 0x0962, 0xc0c8, 0xaef7, 0xd68d, 0xe7eb,
    0xf8ac, 0x997a, 0x8a7a, 0xbaad, 0xe7a4, 0x0774, 0x5735, 0xe597, 0xc70e, 0x5347, 0x04b7, 0xfa9d, 0xe967, 0x698a, 0x6fb5, 0x1c1f,
    0xa8e7, 0x479a, 0x0d73, 0xabf7, 0x23e8, 0xcd97, 0x4901, 0x7fac, 0xa7ea, 0x3221, 0x994f, 0x555c, 0xa199, 0xc057, 0x4b69, 0xcc2b,
    0xec3e, 0x1574, 0x410d, 0xe48e, 0xcb77, 0x05b8, 0x231a, 0x7120, 0x9143, 0x43b1, 0x2fb3, 0x97f2, 0x7956, 0xd4c6, 0xd2aa, 0x93aa,
    0xc3df, 0x42c4, 0x7435, 0x0f93, 0xaf91, 0x6cf9, 0x7df8, 0x5e59, 0xf178, 0x7ba2, 0xcbc9, 0x5bc9, 0x904a, 0xac69, 0x7a19, 0xe728,
    0xafec, 0x83f4, 0x737d, 0x4a1a, 0x65f6, 0x52fe, 0xf31d, 0xe13c, 0x4c05, 0x844b, 0xbb38, 0x8d60, 0xfebf, 0xf917, 0x1305, 0xb4de,
    0x203a, 0x4309, 0x2a95, 0x75d1, 0xd066, 0x83a9, 0x3873, 0x2cbc, 0xb827, 0x3fbd, 0x2679, 0xe8be, 0x0096, 0x38a4, 0xacad, 0x738a,
    0xe0cf, 0x8e2c, 0xe8c2, 0x38d4, 0x8033, 0xa95b, 0x273d, 0xa03b, 0x9b4d, 0x8366, 0x1d03, 0x4c96, 0x1eec, 0x71a9, 0x09b9, 0xd3ac,
    0x4917, 0x2a3f, 0xf6aa, 0x9b5b, 0x9ed7, 0xa61b, 0x9151, 0x22a4, 0x36c0, 0x28a0, 0xc605, 0x5d22, 0x9935, 0x4080, 0x527f, 0x944b,
    0x557f, 0xbbb1, 0x2359, 0x4da2, 0x5d44, 0x4af1, 0xc996, 0x3685, 0x3efd, 0x174e, 0xf9fb, 0x9c97, 0x30bd, 0xc6fb, 0x1ded, 0xc1ae,
    0xf1b9, 0xe2a5, 0xca98, 0x4209, 0x4dbf, 0xb028, 0xdbd5, 0x38d0, 0x2468, 0xc4fb, 0x7a3a, 0x8f71, 0xf8e2, 0x1706, 0x0a6c, 0xe3a3,
    0xaf58, 0x8a46, 0x3f08, 0x2480, 0xf4f5, 0x1d61, 0x5f52, 0xc94f, 0x4909, 0x775b, 0x9d7b, 0x22b9, 0x57e0, 0xd090, 0x3b85, 0x3ba9,
    0xd611, 0x4f5f, 0xdbfc, 0x725a, 0x6f33, 0x63f8, 0x74b3, 0xe843, 0x9cb1, 0xe396, 0x1de7, 0xabeb, 0xbbfb, 0xae1b, 0x922b, 0xb9d7,
    0x71fb, 0x5414, 0x5b66, 0x59f9, 0x9d5d, 0x2e9d, 0x0176, 0x5709, 0x9a43, 0x3d0c, 0x3df0, 0x5df9, 0x4682, 0x4fbc, 0xaed4, 0x24c0,
    0x0b92, 0xa832, 0x2df3, 0x4e54, 0x9056, 0xa994, 0x3592, 0xda24, 0xc3c6, 0x411d, 0x49ed, 0xf464, 0x65bb, 0x5eaf, 0xa669, 0xf1c6,
    0xe20a, 0x188f, 0xe0b9, 0xb5d3, 0xe913, 0xa263, 0x7c2f, 0x0f9a, 0xe297, 0x8047, 0x6a3d, 0x9dc9, 0x096f, 0x258f, 0x978c, 0x3d9f,
    0x4850, 0x66f3, 0x54f7, 0x5a1a, 0x4a49, 0xed87, 0x9858, 0xfca6, 0x363c, 0x5172, 0x9a82, 0xfe31, 0x4c62, 0xa6af, 0x305f, 0x8bc8,
    0x395f, 0x3fdd, 0x6d19, 0x83d3, 0x621e, 0x0099, 0xf70b, 0x999a, 0x1726, 0xa78b, 0x02a8, 0x2a5f, 0x68a1, 0x777b, 0x2ebd, 0x1db4,
    0xcb58, 0xd2ea, 0x18c0, 0x3138, 0x12a3, 0xaf4d, 0x857c, 0xf766, 0x1841, 0x146b, 0x8f4f, 0x7233, 0xd991, 0x8789, 0xcd5a, 0xc383,
    0x8dfc, 0xdadd, 0x4bdc, 0xbb6f, 0x3f63, 0x9f11, 0x3c06, 0x508f, 0xca8a, 0x48cc, 0x56b4, 0xd199, 0x2aa2, 0x1adb, 0xaad4, 0x8362,
    0x37bb, 0xe42b, 0x1c56, 0x61d4, 0x6d7c, 0xd0d9, 0x3e4e, 0xea83, 0x8a9e, 0x8262, 0x1eff, 0xd386, 0xea34, 0xa116, 0xd43e, 0xe8e5,
    0xf375, 0x7232, 0xc7ad, 0x4f3c, 0x7535, 0x417e, 0xa198, 0x9008, 0x01c8, 0xc5e7, 0x0477, 0x4d85, 0xfa6e, 0x6ca7, 0x6c10, 0x889d,
    0x4b28, 0x148b, 0xeda7, 0x3934, 0x1afb, 0xbe6a, 0xa6b3, 0x7252, 0xd205, 0x2aef, 0x8503, 0x726e, 0x2ea1, 0x534b, 0xc325, 0x1270,
    0x70a5, 0xe30c, 0x007a, 0x9b49, 0x0493, 0x89f3, 0x42bd, 0xf3b0, 0x38c2, 0x532b, 0x0b8b, 0x2a6e, 0x7768, 0xde3e, 0xb402, 0x7c77,
    0xc65c, 0x10b6, 0xce90, 0x3dc2, 0x7497, 0x41f7, 0xa8ab, 0x3695, 0x513c, 0x9256, 0x3f49, 0x5c31, 0x359d, 0x9293, 0x4d90, 0x38b8,
    0xcbd8, 0x1958, 0x7875, 0xfdcc, 0x246e, 0xc305, 0xe72f, 0x14ef, 0xad32, 0xbd13, 0xa946, 0x5972, 0x5799, 0xe715, 0x47dc, 0x7248,
    0x95e7, 0xe69f, 0x59e7, 0x72f7, 0x691f, 0xbcde, 0xfe9c, 0x7672, 0xcac9, 0x4e42, 0xac41, 0x1f45, 0x4edc, 0x01ec, 0x85e6, 0x6d0f,
    0x7d82, 0x40c3, 0xb500, 0xdd00, 0x78c9, 0xd9f3, 0xba9b, 0xcd22, 0x4db1, 0x5925, 0xfd57, 0x27b7, 0x558c, 0xabe5, 0x7c5f, 0x8fb6,
    0x4c7d, 0x724e, 0x1c71, 0xbe85, 0x70c0, 0x150a, 0x7c7a, 0x9b91, 0x44ec, 0x6083, 0x2e9a, 0x9630, 0xb9f0, 0x7c81, 0xa494, 0xd87e,
    0xd1a1, 0x75bf, 0x5e7c, 0x1c80, 0xf5c4, 0x7e2c, 0x3a5b, 0x0821, 0x4dda, 0x9b76, 0x4a08, 0xae36, 0xc729, 0x04cb, 0xf338, 0x158f,
    0x44ce, 0x8236, 0xec73, 0xe56f, 0x0861, 0xe1bc, 0xd417, 0x0f81, 0x9343, 0xda7e, 0xd4ec, 0x3d24, 0xe47c, 0xd1e5, 0x22e0, 0x3c2d,
    0xc807, 0x887d, 0x222d, 0x6068, 0x3f92, 0x302f, 0xffd0, 0x2060, 0x16f8, 0xf057, 0xf276, 0x4d47, 0xc33b, 0xf53c, 0x870d, 0x076a,
    0x166f, 0x1107, 0x8c6a, 0x6bae, 0x0b45, 0xdbbb, 0xeccc, 0x96d3, 0x1b87, 0xb6a3, 0x1b7c, 0x1cff, 0x2fc9, 0x972c, 0xdd14, 0x2030,
    0x3129, 0x7f76, 0xaf77, 0x1599, 0x44d1, 0x481b, 0x7778, 0xb76f, 0xa0e3, 0x63c4, 0x1ba0, 0x16a0, 0x3703, 0xfa4e, 0x1a0b, 0xd3a2,
    0xd9d6, 0x18ac, 0xa857, 0x1e76, 0x0cde, 0x06de, 0xf779, 0xb75c, 0xb999, 0x64eb, 0xf376, 0x9777, 0xf740, 0xbaf8, 0xb507, 0x1ddd,
    0xb558, 0x7fbf, 0x71dc, 0x4294, 0x21bf, 0x97f9, 0x7ebe, 0x68dd, 0x0a5e, 0xbe66, 0xb087, 0xe0f1, 0x6a92, 0x9615, 0x07ac, 0xd729,
    0x7e24, 0xbfec, 0xc2d6, 0xb63f, 0x3fff, 0x643e, 0x1105, 0x886c, 0xe160, 0xc5c7, 0xbf50, 0x1623, 0x5e05, 0x6b5c, 0x135c, 0x0284,
    0x827b, 0xfbd3, 0xdd1a, 0x488a, 0xf811, 0xec71, 0x8de8, 0x728f, 0xe1b0, 0xed40, 0x2e7f, 0xa3d5, 0x74ab, 0x4582, 0x339c, 0xe06b,
    0x3fdc, 0x3128, 0x333a, 0xd68a, 0x61d2, 0x0457, 0x3c37, 0x5734, 0x41d6, 0x1963, 0x37d7, 0xa1a4, 0xa2d9, 0x0137, 0xb18a, 0x7cb5,
    0x087b, 0x0f1e, 0x3b6d, 0xde79, 0xf2e2, 0x1af7, 0xceb6, 0xc560, 0x8f63, 0x8fc0, 0x5752, 0xe61f, 0xd97e, 0xeefb, 0xbba6, 0x9302,
    0xa534, 0x8a2d, 0xe9fe, 0xf9ca, 0xac59, 0xb47f, 0x2fa2, 0x199c, 0xdb15, 0x4fd1, 0xe247, 0xfecb, 0xd7d8, 0xf355, 0x8ea9, 0x7c66,
    0x8f20, 0x2f00, 0xb585, 0x5b1d, 0xbfc3, 0x413b, 0xa4ef, 0x7033, 0x2430, 0xacab, 0xe78f, 0x2d8c, 0x595c, 0xd297, 0xa087, 0xbe30,
    0x68df, 0x4f1c, 0x6720, 0x16e2, 0xe5de, 0x9ea4, 0x1ac2, 0x6346, 0xb9d5, 0x3eb1, 0x2900, 0x4322, 0x75cb, 0x779f, 0x54c3, 0xb82d,
    0xa41a, 0x580c, 0x1e23, 0x071d, 0x5f24, 0xa178, 0x1e87, 0x20c0, 0x245a, 0x7581, 0x88a3, 0xf0fa, 0x8c13, 0xfbf8, 0x56df, 0x801d,
    0x3c22, 0xd863, 0xda51, 0xd3ff, 0xb22c, 0x99aa, 0x3ace, 0x4c92, 0x653b, 0xd377, 0x7d72, 0x8ca1, 0xd888, 0x7f0b, 0x2ae9, 0xc5ca,
    0x4098, 0x8b27, 0xbc76, 0x6e99, 0x7127, 0x84d0, 0xcca0, 0xfba5, 0x7f42, 0x415e, 0x02b0, 0x8d28, 0xdfa9, 0x704b, 0x9909, 0x18b4,
    0xe2ed, 0x8d68, 0x7198, 0x14d1, 0x0df0, 0x1b19, 0xa479, 0x7a8e, 0xee1a, 0xdb4c, 0x6cbb, 0xca79, 0xa9c5, 0x3544, 0xe6c4, 0x8806,
    0x336c, 0xb820, 0xb94e, 0x3d60, 0x4e06, 0xdce5, 0xf9a6, 0x8745, 0x1740, 0x271c, 0xd4ff, 0xa788, 0xb78e, 0xe38f, 0x7b0a, 0x08c5,
    0x5481, 0xd179, 0x186c, 0xa658, 0x77d1, 0xf7c4, 0xc83c, 0x8812, 0xee4c, 0x51eb, 0x7222, 0x6cce, 0x4090, 0xcd33, 0xdb8d, 0xdd59,
    0x8bd2, 0x58f8, 0xb4e5, 0x333b, 0xbd45, 0x9508, 0xb37f, 0xc2b0, 0xc75b, 0xc7f1, 0x99ce, 0x09b5, 0x18dc, 0x476b, 0x969c, 0xff36,
    0xa1ca, 0x6f5b, 0xc464, 0x5eb2, 0x4252, 0xd6dd, 0xfdb6, 0x0b32, 0xcef0, 0x4f3d, 0x43b7, 0x7036, 0x8405, 0xca6a, 0x0011, 0xc390,
    0xa214, 0xe38e, 0x870c, 0x3d9e, 0xa60c, 0x96cc, 0x8828, 0x4364, 0xf9ed, 0x1abb, 0x8e12, 0x40a8, 0x1bec, 0x0f18, 0xef11, 0xd444,
    0xef43, 0x085a, 0xe7d2, 0x2151, 0x65ab, 0x1ed6, 0xa517, 0xf0b1, 0x3f21, 0x3a62, 0xd07c, 0x7be1, 0xa7ba, 0xd0d2, 0x8ec8, 0x7060,
    0xbc25, 0x3c96, 0xf968, 0x8649, 0xeaa4, 0xaab4, 0x4563, 0x9bfe, 0x87f9, 0xd495, 0x4bd0, 0xff99, 0x7d67, 0x3a21, 0xd8c5, 0x65d8,
    0x3c9d, 0x28db, 0x4d29, 0x8b62, 0x8c9e, 0x3da9, 0x7f78, 0x3210, 0x12c0, 0x1487, 0x9bf2, 0x6261, 0x4e00, 0x4a00, 0xe46b, 0x3e5b,
    0x8dd0, 0xa5da, 0xee38, 0x4a21, 0x1a66, 0x73da, 0x623a, 0x213f, 0xc1a0, 0xab76, 0xc38d, 0x51db, 0x3d8c, 0x3f43, 0x6275, 0x293b,
    0x1a75, 0x8b50, 0x4c38, 0x2dc9, 0x4979, 0xedd3, 0x0f4c, 0x62fe, 0x17be, 0xcd07, 0x8637, 0xae8c, 0x9e3d, 0x0c87, 0x2d2b, 0xd576,
    0x3d4e, 0x506f, 0x0d06, 0x5bb5, 0x06a7, 0x05a0, 0x877e, 0x0e7d, 0xd0f8, 0x329b, 0x062a, 0xa646, 0x93dc, 0x3891, 0x91ab, 0xc691,
    0xd626, 0xce80, 0xeed2, 0xe9d1, 0x1d93, 0x4b24, 0x3329, 0x06e9, 0xe101, 0xf723, 0x7ca8, 0xc406, 0x7d2f, 0x5ea0, 0xba80, 0x04d8,
    0x978f, 0x2d67, 0x5cd5, 0x965f, 0xf9bb, 0x2342, 0x603d, 0x4eb9, 0x30af, 0x2da5, 0x6be8, 0x1158, 0xefa0, 0x7650, 0x5268, 0x7b69,
    0x41e2, 0x3a28, 0x9e93, 0x1dd0, 0x964d, 0x4bbc, 0xb40d, 0xd9d8, 0x015f, 0x8666, 0xfddd, 0x0dd7, 0xeb51, 0x4cee, 0x45f8, 0x1dbe,
    0xf3f8, 0x449a, 0x12ee, 0x5ce7, 0x3456, 0xe9bf, 0x5a84, 0xd3a8, 0x9d06, 0x741e, 0x8be2, 0xfb4a, 0xb8f5, 0x89e7, 0x5ba3, 0x4911,
    0x78ae, 0xea06, 0x35de, 0x2db7, 0x5333, 0x7ee1, 0xf6ed, 0x0eef, 0x4a0f, 0xdabd, 0xc748, 0x55f1, 0x18f0, 0x3d42, 0x04e0, 0x04a0,
    0x7fd2, 0xc44c, 0xb0ac, 0x5493, 0x070b, 0x3e2e, 0xaa9f, 0x84c8, 0x4ae3, 0x26c3, 0x2f56, 0x03f2, 0xa215, 0x93d6, 0x7949, 0xd3ed,
    0x3bca, 0xdaf0, 0x6e87, 0x6ce0, 0x7562, 0x3b29, 0x90f3, 0xaa50, 0x023c, 0x14bf, 0xfd3c, 0x22e7, 0xb6ea, 0xea29, 0x1263, 0x7d35,
    0x02cd, 0x836c, 0xd68b, 0xf9b8, 0x9af9, 0x7829, 0xd8b4, 0xffe5, 0xde67, 0xd0b9, 0xa558, 0x444f, 0x17df, 0xeda3, 0x14a5, 0x523a,
    0x828a, 0x3f6e, 0x148e, 0xe3a1, 0x606a, 0x16d0, 0x4285, 0x301c, 0xc7ae, 0x6e70, 0xb608, 0x6a7d, 0x63be, 0x279c, 0x5b0b, 0xfed8,
    0x4cd4, 0xd678, 0x328a, 0x8417, 0xead5, 0x30e8, 0xfff9, 0x21f3, 0xc988, 0x64bd, 0x4878, 0xacff, 0xc550, 0xb937, 0x6852, 0x697b,
    0x8811, 0x90f2, 0xed86, 0x0b44, 0x4d96, 0xbc4b, 0x9b10, 0xb62d, 0x4fe0, 0xf563, 0xbbf3, 0x9bdb, 0x4282, 0x379b, 0xa6bf, 0x9a13,
    0x2cc3, 0x35c7, 0xfc27, 0x99e0, 0x8c07, 0xf60d, 0x1587, 0x7518, 0xb732, 0x9836, 0x5251, 0xc8ee, 0x0944, 0x1e64, 0x6941, 0x8938,
    0x6056, 0x61b4, 0xf132, 0x590a, 0xe8ef, 0xd0a1, 0xa205, 0xc376, 0x307b, 0xf470, 0x90d4, 0x6b9c, 0x3312, 0xa2b2, 0x6193, 0x71a5,
    0x2e11, 0x1530, 0xf321, 0xf9ff, 0x298c, 0x72e5, 0x7c44, 0xb5ef, 0x4d94, 0x1c5a, 0xffd4, 0x88a7, 0x304c, 0xfc2b, 0xfdba, 0xc74c,
    0x8154, 0x79d1, 0xab81, 0x3db0, 0xa894, 0x8c6c, 0x4020, 0x9acc, 0x9b37, 0x8242, 0x54aa, 0x45d7, 0x6424, 0x2018, 0xa7e4, 0xa92f,
    0xbd68, 0x8f9b, 0x1c6e, 0x8eda, 0x55e9, 0x6d02, 0x4afa, 0xa99d, 0xba40, 0xe55d, 0xc83a, 0x632c, 0x118e, 0xfeac, 0x3048, 0xa2f7,
    0x30f1, 0x3b32, 0x175f, 0x1ee8, 0xdcee, 0x1edf, 0x05a9, 0x7eea, 0xa181, 0xb488, 0xec7a, 0x06e7, 0x89fc, 0x1513, 0x00a2, 0xbe73,
    0xb5c1, 0xe8c5, 0x29ea, 0xeab6, 0x27df, 0x391a, 0xe3e2, 0xb070, 0x5571, 0x653e, 0x43ef, 0x5a08, 0x3c20, 0x7ee4, 0x3430, 0x1691,
    0x128e, 0xa840, 0xe2b3, 0x65ea, 0x47a8, 0x031e, 0x83c1, 0x4317, 0xc884, 0x9faa, 0x86f6, 0xd741, 0x57d3, 0x3126, 0x127a, 0x33ca,
    0xce9f, 0x3930, 0x3b40, 0x4d3b, 0x3f7c, 0x1756, 0x6e49, 0x61c2, 0x6f69, 0xe8fb, 0xb14f, 0x28e9, 0xbb5d, 0xea14, 0xce8e, 0xabca,
    0xd2f8, 0x3922, 0x109c, 0x1499, 0x4600, 0x8244, 0xe6ad, 0x5411, 0x77c6, 0x8d76, 0x4f2a, 0x14d9, 0x18ba, 0x1e0c, 0x4de2, 0x3136,
    0xcfe6, 0x1002, 0xaf14, 0xd445, 0xcaae, 0x9c4e, 0xfd75, 0x00e2, 0x5406, 0xc117, 0x6e23, 0x8fcb, 0x8568, 0xf5a4, 0xfb39, 0xc631,
    0xe107, 0x9004, 0xdb63, 0x648c, 0x42d3, 0x1527, 0x942a, 0x3ce4, 0x3a3e, 0xa6c0, 0x0be0, 0xc0a5, 0xb700, 0x6ef9, 0xec0d, 0x0fb4,
    0x67f3, 0x0801, 0x6557, 0x4e27, 0xf083, 0x4802, 0xa169, 0x8a93, 0x4ffa, 0x9889, 0x866d, 0x1704, 0x5c33, 0xa2da, 0x71af, 0x2f2e,
    0x061d, 0xbd5a, 0x92d9, 0x94c1, 0x67c6, 0x98ea, 0xb15f, 0x6ca8, 0x8f82, 0x9e06, 0xc0c6, 0xba98, 0x7358, 0x30a7, 0xcb19, 0x396e,
    0x9ff4, 0x3113, 0x8ef2, 0x36bc, 0x0cdb, 0x2e08, 0x5520, 0x745e, 0x5b58, 0xd5b1, 0xac26, 0x5adc, 0x5483, 0x8b01, 0x4fb0, 0x6818,
    0xb866, 0x45b5, 0x5b9d, 0x13eb, 0xe35e, 0x5e5c, 0x713e, 0x6092, 0x80fc, 0x8bd5, 0xc8b9, 0x3f4f, 0x29e2, 0xf53f, 0x9b33, 0x9c88,
    0x3904, 0x69c1, 0x8616, 0xa3cf, 0xe31c, 0x5c79, 0x602e, 0xb163, 0xc1b9, 0xbb1e, 0x18cb, 0xb20e, 0xb101, 0x1f2a, 0xa991, 0x818a,
    0x4c3c, 0x8ecc, 0x2f5a, 0xe3e6, 0xb589, 0x33a0, 0x8f53, 0xd41b, 0xe84a, 0x759f, 0x2e4f, 0x8942, 0x3f0c, 0xc525, 0x3b61, 0x454d,
    0x8105, 0x540f, 0xefc7, 0xeae9, 0x9a1d, 0xaecf, 0x94b7, 0x16af, 0x56fb, 0xf1c1, 0xfcc8, 0x4bc3, 0x75ac, 0x0b8d, 0x60d3, 0x289c,
    0x9b0e, 0xae16, 0x823e, 0x7cd9, 0x3267, 0xdbf7, 0x6024, 0x02b8, 0x4ec1, 0x247b, 0x0734, 0x7e80, 0xd50b, 0x57db, 0x3ac6, 0x919c,
    0xb438, 0x289b, 0x1c5d, 0x4b22, 0x797c, 0x914c, 0x2471, 0x9a4c, 0xeae0, 0xa036, 0x8032, 0x855b, 0x3b6c, 0x9b48, 0x2e10, 0xa5d9,
    0x4fe9, 0x4aec, 0x77cf, 0xba49, 0xee55, 0xf9f6, 0xe10a, 0x9d0f, 0x6544, 0x8f6c, 0x41df, 0xa0ec, 0x5145, 0x4dba, 0x184a, 0x01d1,
    0xbf7d, 0x2673, 0x5476, 0x24b8, 0x2ede, 0xd688, 0xf5fc, 0x50cf, 0x9d4f, 0x04ab, 0x8952, 0x1235, 0xe114, 0x3a95, 0xbb8e, 0x76e5,
    0x9df6, 0x6985, 0xcf98, 0x32e0, 0xda4f, 0x8a75, 0x85cb, 0xc5a3, 0xd258, 0xabf2, 0x89c2, 0x0d36, 0xd7ae, 0xa194, 0x2b00, 0xd288,
    0x77f3, 0x8446, 0x99c1, 0xfa22, 0xeb33, 0xf318, 0x52b4, 0xd2e8, 0x66a5, 0x2cb7, 0x49ac, 0xc6e3, 0x930e, 0xb822, 0xcadc, 0xda60,
    0x32c8, 0x6cf4, 0x452b, 0x8d2e, 0x2964, 0xcbc4, 0xc65a, 0x5697, 0xefbe, 0x97ed, 0x602a, 0x225c, 0x6a56, 0xcb72, 0x808a, 0xb9e8,
    0x0c3a, 0x7ab5, 0xef12, 0x9365, 0x25b3, 0x2983, 0x87b5, 0xd96a, 0x4fae, 0x3194, 0x45d3, 0x12c6, 0xb3a5, 0x1082, 0xc466, 0xb398,
    0xcf8c, 0x31d5, 0x0717, 0x09b2, 0x62bf, 0xd950, 0xce47, 0x5d1e, 0x9a14, 0xda5e, 0xe9af, 0xe684, 0x7bc4, 0x3511, 0x23b2, 0x1c18,
    0x6c00, 0x66ce, 0x033d, 0x8822, 0x1913, 0x4652, 0x7648, 0x7b78, 0x9378, 0x8c4d, 0xb3a3, 0xaaf2, 0x0138, 0x0128, 0xd6e8, 0x5244,
    0x2091, 0x1180, 0x85d5, 0x0fdf, 0x5fb8, 0xd4cc, 0xfa6f, 0x8d15, 0x586e, 0xd458, 0x3bb0, 0xe8ad, 0x95cc, 0x0546, 0xcecd, 0x0eb3,
    0x1f05, 0x3c0d, 0x1796, 0xe0b2, 0x818d, 0x7531, 0xa54b, 0xb068, 0xaec6, 0x7b7e, 0x51a0, 0xee60, 0x07e7, 0x4d64, 0x493c, 0xfdc5,
    0xe6b0, 0x614e, 0xf4b9, 0x5448, 0x9633, 0x72dc, 0x2ade, 0x8b20, 0xe51c, 0x432f, 0x4a78, 0xb551, 0xec19, 0xd547, 0x8553, 0xf8d1,
    0xc7e5, 0xb711, 0xe318, 0xfd9c, 0xe052, 0x05f0, 0x07da, 0xf606, 0x2d6e, 0x5613, 0x340c, 0x27d8, 0x9fa7, 0xe45c, 0x4e44, 0xcd99,
    0x0963, 0xa2e9, 0x59cc, 0x6233, 0x7342, 0xf4d7, 0x0e0c, 0x11d9, 0x7730, 0x28d0, 0xfee2, 0x249e, 0xdaa8, 0x253c, 0xfc68, 0xc2a9,
    0x91f6, 0xcdeb, 0x4ca2, 0x4f67, 0x4e98, 0xd3f7, 0x0e9c, 0xbcc3, 0x5deb, 0x417a, 0x635d, 0x9283, 0x44bb, 0x934e, 0xb439, 0x5309,
    0xb051, 0xe1e5, 0x8786, 0xf39a, 0xc82d, 0x80ab, 0xf83b, 0x151b, 0xc664, 0xc814, 0x7dc4, 0x2487, 0x1460, 0xe627, 0x7a7d, 0x27ee,
    0x6904, 0x0ebb, 0x5e27, 0x26c9, 0xf08b, 0x7c3b, 0xe85b, 0xc711, 0x5f03, 0xe19c, 0xad1d, 0x7063, 0xe94a, 0xe8af, 0x5c75, 0x333d,
    0xdbf6, 0xc82c, 0xf952, 0x4015, 0x0392, 0x732d, 0x75e2, 0x926c, 0x94ae, 0x8afe, 0x7b44, 0x527e, 0x9255, 0xdb14, 0xae8b, 0x54a9,
    0x11b5, 0xce17, 0xe131, 0x7e69, 0xd023, 0x3a8a, 0x54a6, 0xc51e, 0x9a35, 0x7657, 0xe27e, 0xd7a7, 0x039f, 0x52be, 0xe7a6, 0xad34,
    0x7d3f, 0x84e9, 0x44e6, 0x7a76, 0xdbac, 0xfa0b, 0x80de, 0x3d73, 0x3de8, 0xed4d, 0xfcf9, 0xc601, 0xbc92, 0x44ae, 0xd271, 0x0eac,
    0x56bb, 0x7144, 0xfb13, 0x3795, 0x607b, 0x0357, 0x5122, 0x5b97, 0x16a6, 0x81f1, 0x2c8d, 0x73b7, 0x429f, 0x801a, 0xfe81, 0xb1f7,
    0x3ee7, 0xe54f, 0x2f17, 0x0ed2, 0xa361, 0xb5e6, 0x6f1b, 0x27ab, 0x4738, 0x6475, 0xd9c5, 0x6b04, 0x58cf, 0xb142, 0x1b68, 0xb1b3,
    0xf42e, 0x0f19, 0x2b1e, 0xe671, 0xb524, 0xbba1, 0x0996, 0x8e53, 0x410f, 0x7c61, 0x9aca, 0x5ccd, 0xb2b8, 0xa52f, 0x1b93, 0xe9c6,
    0x8ae2, 0x779a, 0x5c6d, 0x9410, 0xe7b9, 0x671b, 0x36ed, 0x9bb4, 0xcf1f, 0x5b18, 0x3276, 0x4283, 0x4860, 0x5957, 0x143e, 0xddc8,
    0x2fbe, 0xdb47, 0x9b9c, 0x40e1, 0x294a, 0xa474, 0xc7b4, 0x9447, 0x4bba, 0xfba0, 0x7442, 0xface, 0x33d4, 0x7f3d, 0xcbb0, 0xb18b,
    0xbccf, 0xa173, 0x111e, 0x31ec, 0x4ab1, 0x889e, 0xebb5, 0x6528, 0xdd7c, 0x8c9c, 0xa92b, 0x0ff3, 0xb806, 0xb227, 0xff33, 0x97a0,
    0x2b2a, 0x3123, 0x1042, 0x74b6, 0xf1fc, 0xb185, 0xfc58, 0xeb89, 0x49df, 0xe066, 0x2077, 0xd981, 0x7f87, 0x8276, 0x6bac, 0x5072,
    0x0bbb, 0x9610, 0x3900, 0xbcf8, 0xdcae, 0x71d7, 0xeb7e, 0xa343, 0x6b0b, 0xb63a, 0x5187, 0x5871, 0x1e41, 0x5e00, 0xb1e2, 0x671e,
    0x35f3, 0xf052, 0x2d1f, 0xc930, 0xb169, 0xffcb, 0xd3cf, 0x2e72, 0x0842, 0x96ce, 0x5569, 0xd549, 0xe429, 0x1b82, 0x37fd, 0x8ac6,
    0x059a, 0x06d9, 0x1f39, 0x7974, 0xad17, 0xf371, 0xc352, 0xb3bc, 0xfcbf, 0x169b, 0x792c, 0x784b, 0xfd27, 0x44cc, 0x0c93, 0xf2d1,
    0x8ff0, 0x722d, 0x7b43, 0xa0eb, 0x81ce, 0x6c0b, 0x3140, 0x6c17, 0xf1b8, 0x126b, 0x0897, 0x980a, 0xdced, 0x4b23, 0x1ac1, 0x7671,
    0xddfc, 0xa111, 0x0cb2, 0x1b3d, 0xd5ae, 0x1c51, 0xcfb9, 0xf953, 0x9596, 0xbb6a, 0xf22f, 0xfd7f, 0x299b, 0x2a9d, 0x69bd, 0x260a,
    0xae19, 0x516d, 0x27fd, 0xcc44, 0x39ac, 0x9853, 0x47c1, 0x4f03, 0xd880, 0x0f95, 0xe0dc, 0x5d8f, 0x1f86, 0xe292, 0x7425, 0xbacf,
    0x009c, 0x0094, 0x49bc, 0xc626, 0x4ae6, 0x02a3, 0x2c37, 0x6a2c, 0xcfd3, 0x722e, 0x16b7, 0xab09, 0x6d54, 0x129e, 0x3b98, 0x1468,
    0xf0f7, 0x10b1, 0xbb0f, 0x055d, 0x5ffe, 0x4d8b, 0xc945, 0xf0d8, 0x65ad, 0x7c72, 0x07e9, 0x5fd9, 0xce4d, 0x70a0, 0x9434, 0xe6fa,
    0x051c, 0xe710, 0x4470, 0xabd4, 0x59ab, 0x7870, 0xf6a0, 0xa3bb, 0x56f2, 0x72f2, 0xa5fc, 0xcbec, 0xe782, 0x4ed7, 0xc279, 0xe63b,
    0x8fa6, 0x9b71, 0xb4c7, 0x4794, 0x7e8b, 0x3a56, 0xf90d, 0xccbf, 0x577e, 0x0f7c, 0x3d19, 0x527b, 0xedec, 0x933e, 0x67b0, 0x1f55,
    0xdc7e, 0x1505, 0x82e4, 0xaa0c, 0xa2c1, 0x2e95, 0xa7e0, 0x0c46, 0x06b8, 0x27b2, 0x3443, 0xb6b8, 0x5710, 0x78c4, 0xf790, 0xfa86,
    0x1bed, 0xe389, 0x785a, 0x45c0, 0xf3d4, 0xef0c, 0xa3cb, 0xc8f9, 0xa986, 0x705b, 0x0a36, 0x3cbc, 0xeb96, 0xef3e, 0x9f2f, 0xf4ea,
    0x4eb1, 0x49fb, 0x7a48, 0xa9d9, 0x995d, 0x4d24, 0xb4fd, 0x2687, 0x5200, 0x8644, 0x379c, 0x0c21, 0x73ab, 0x7d62, 0x33b3, 0x4e5b,
    0xc77c, 0x4f38, 0xec88, 0x0607, 0xb616, 0xfdb1, 0x5802, 0x90e2, 0x43c5, 0xc2ab, 0x9400, 0x9c00, 0x616d, 0xc756, 0x7cb6, 0xc8d7,
    0x8f5d, 0xdce0, 0x5223, 0x8511, 0x6c11, 0xd4fa, 0xac4f, 0x756e, 0x60ca, 0x6cc9, 0x290e, 0x2580, 0xf384, 0x77cc, 0xc4c2, 0x37e5,
    0xe357, 0xce7b, 0x1f02, 0xa82f, 0x74d2, 0xba7b, 0xc379, 0x10c2, 0x3584, 0xc68c, 0xafee, 0xc72b, 0xcbbd, 0x3d49, 0x53c6, 0xa75e,
    0x434d, 0x3f3e, 0xcadf, 0xd8e7, 0x9265, 0xee33, 0x046d, 0x899c, 0xce40, 0x2dc4, 0xd6a1, 0x624a, 0xd1be, 0x9e38, 0x4927, 0x8b93,
    0xc0d4, 0x2da0, 0x2c98, 0x2e5d, 0x850a, 0x6038, 0x41ed, 0x7747, 0x2893, 0xd9d3, 0x7b52, 0x193d, 0x3bbe, 0x015a, 0x6420, 0xfef0,
    0x0515, 0x7edc, 0x0532, 0x9931, 0x291c, 0xc743, 0x7d78, 0x51c4, 0xa939, 0xfb45, 0x51b6, 0x793a, 0x06d2, 0x3451, 0x16c5, 0x9a52,
    0x9864, 0x8f96, 0x1578, 0x71ad, 0xa3e4, 0x3043, 0xeaac, 0xa301, 0x4e46, 0xbe6e, 0x7f7a, 0x704f, 0x1c5e, 0x30ec, 0xd17d, 0x4cf2,
    0xcc43, 0x2013, 0x289a, 0x6903, 0x367e, 0xab7c, 0x4016, 0x964a, 0x75a3, 0xf9fa, 0x7148, 0x012c, 0xc690, 0x3047, 0xe714, 0x595b,
    0x29a6, 0x9fa5, 0x2014, 0xe09a, 0xa4fa, 0x83bc, 0x982c, 0x5d2e, 0x477b, 0xb06b, 0x029b, 0xf8e8, 0x003f, 0x556c, 0x8bb1, 0xb0cb,
    0x52bc, 0x1751, 0x2c0a, 0xd36f, 0x9e88, 0xb14a, 0x63b4, 0xdec4, 0x8ff1, 0x14d4, 0x0524, 0xb1fe, 0x39a9, 0x45fb, 0xf1cd, 0x407c,
    0x1a9f, 0x90ed, 0x416f, 0x046a, 0x2a58, 0xa6ba, 0x62f4, 0xe0da, 0x0b84, 0x6976, 0x8612, 0x4074, 0x571d, 0x4ccf, 0xeba2, 0x552a,
    0x2453, 0x1e5f, 0xbe7d, 0x7b95, 0xdf0e, 0xfc22, 0x5ccb, 0x80e4, 0x20ee, 0x5905, 0x0753, 0xa0cd, 0xed39, 0x330d, 0x5978, 0x70e6,
    0xc549, 0xd0b4, 0xa713, 0xb2ab, 0x3654, 0xd8af, 0xca60, 0xc96c, 0xd8b1, 0x3017, 0xd1e7, 0x430b, 0xea0d, 0xc7a9, 0x71f3, 0x17ad,
    0x3dbc, 0x3b24, 0x4411, 0x819e, 0xc68a, 0xfd37, 0x87ef, 0xc2ea, 0x7b03, 0x03ed, 0x7ece, 0x718c, 0x88ec, 0x0706, 0xb119, 0x2ce6,
    0x9fcd, 0x2004, 0x1fb6, 0x2529, 0x5e29, 0xa88b, 0x7caa, 0x40a9, 0x4f51, 0x55b7, 0x781a, 0x3e0a, 0xf3e8, 0x85a1, 0xc165, 0x2f2c,
    0x955d, 0x389d, 0x11d3, 0x09f9, 0xfaeb, 0x01c4, 0x12ba, 0x67dd, 0x325e, 0x7cf6, 0xea62, 0x031b, 0x42e2, 0xbbf4, 0x60d1, 0x4a97,
    0xfe62, 0x4c0f, 0x08d4, 0x82de, 0x0d9f, 0x6615, 0x21db, 0x353e, 0xf686, 0x41d7, 0xc39a, 0x3985, 0x1fe1, 0xe45a, 0x8b7a, 0x112a,
    0x83b9, 0x8146, 0xc1b5, 0xc5e8, 0x8e6b, 0x8659, 0x4d75, 0x54b0, 0x6280, 0xd82e, 0x433f, 0x8c3d, 0x039d, 0xd816, 0xccc5, 0xa350,
    0xa80c, 0x822f, 0x360c, 0x2c53, 0xdc46, 0x1f97, 0x7a2e, 0x22a0, 0xdbee, 0xf712, 0xf6fc, 0x5d8d, 0xba0e, 0x37b4, 0xdcc1, 0xa340,
    0x0ad1, 0xeb49, 0xa7a2, 0x98a0, 0xf673, 0x8c63, 0xabb6, 0x6959, 0x884d, 0x16db, 0x9ac8, 0x0fce, 0xccfa, 0xc63c, 0xfb8b, 0x9278,
    0x5076, 0xa0ef, 0x80e8, 0x0c25, 0xc2ad, 0x4019, 0xd2ec, 0x1708, 0x112e, 0x3015, 0x5cf4, 0x4045, 0xe371, 0x24d6, 0x6d30, 0x656e,
    0x293f, 0x3da2, 0xaa54, 0xd745, 0xb831, 0xd68e, 0x999e, 0xae3a, 0x3582, 0xece2, 0xd8d9, 0x0db4, 0xb9db, 0x9646, 0xd8fb, 0xff40,
    0xdd63, 0x300b, 0x65be, 0x89ca, 0x8cfd, 0x467c, 0xce1f, 0x48a4, 0xe835, 0xedf4, 0xa4f2, 0x914d, 0xc2f2, 0x5c16, 0x51de, 0x86d7,
    0xfce9, 0x0393, 0x5f47, 0x4da9, 0x5b2d, 0xb0f6, 0x401c, 0xbfae, 0x209d, 0x9236, 0x071a, 0xbb7a, 0x26e2, 0x512c, 0x97a3, 0xfb50,
    0x6d8f, 0x9231, 0xa27a, 0x9c65, 0x1c27, 0x4017, 0xbe3c, 0xa648, 0x131d, 0x489f, 0x3f2e, 0xb88d, 0xd5ea, 0xe830, 0x4540, 0xf45c,
    0x841f, 0x4012, 0xfdfb, 0xaac5, 0xa23d, 0x3f29, 0xbfa6, 0x139a, 0x601b, 0x5014, 0x045f, 0x5019, 0x5dab, 0xa238, 0x58a6, 0x6c18,
    0xf2f3, 0x3898, 0x0435, 0x923b, 0xa23f, 0x60cc, 0x30bf, 0x3961, 0x6f25, 0x2f27, 0xf86c, 0xab30, 0x5131, 0x9fc8, 0x3110, 0x9f7f,
    0x5f77, 0xe455, 0xb0fb, 0x55d0, 0x592b, 0x08cf, 0x99da, 0xafa4, 0xee89, 0xc5e3, 0x5a31, 0x64a3, 0x48e4, 0x0398, 0xf182, 0x7901,
    0xe87f, 0x3010, 0x5636, 0x3011, 0x5121, 0xd2e7, 0x3653, 0x3a55, 0x02af, 0xae35, 0x6f68, 0x741d, 0x6312, 0x357d, 0x4681, 0xb983,
    0x5c1b, 0x8c5e, 0x1e1b, 0xb928, 0x8539, 0x9ac3, 0x0b07, 0x2e3e, 0x03de, 0x5d88, 0xee25, 0xb7dd, 0x0ab2, 0xdc41, 0xbb1a, 0xedf9,
    0xc20f, 0x2009, 0xd11e, 0x9f94, 0xb6c7, 0xc918, 0x8e13, 0xa00b, 0xae0d, 0x462f, 0xc29c, 0xcd61, 0xf43f, 0x1808, 0xa890, 0xe973,
    0x85a6, 0x2a4e, 0xd330, 0x9ed3, 0x2855, 0x79c8, 0xcb25, 0xf24b, 0xaec3, 0x411a, 0xe5b8, 0x2c67, 0x9bdc, 0xa862, 0x1641, 0x55bc,
    0xa7f4, 0x2576, 0xf72a, 0x7cfb, 0x5a1c, 0x944d, 0x3cbe, 0x48a6, 0x1964, 0x367a, 0x14b2, 0x65e2, 0xbbf9, 0x4223, 0xf599, 0x798c,
    0x6dfb, 0x6416, 0x01c9, 0xb996, 0x3482, 0x875d, 0xf845, 0xbe1d, 0x9f73, 0xf2a7, 0xd1b0, 0x5af3, 0xab5d, 0x38a2, 0xb03d, 0x81ab,
    0x747c, 0x4d81, 0xa12d, 0xf556, 0x17c0, 0x814b, 0x91f8, 0xb2ff, 0x921d, 0xde1e, 0x865e, 0xca39, 0xfd54, 0x4426, 0x6aa3, 0x94f0,
    0x6e01, 0xddf2, 0x5181, 0x7325, 0xd81b, 0x1f68, 0x6438, 0xf1ec, 0x9b05, 0xfaaa, 0xaa8f, 0xd833, 0xc783, 0x1ec2, 0xf1a3, 0x0aa7,
    0xeeeb, 0x8abc, 0x419b, 0x0ea6, 0xea65, 0xb3e2, 0xb20a, 0x41dc, 0xe45f, 0xfaff, 0x2200, 0x2187, 0x2b2d, 0x76d5, 0x9c54, 0x4d0b,
    0x38d7, 0xa921, 0xe1cc, 0xb2f0, 0xe7ec, 0xc718, 0x661a, 0xda73, 0xd37a, 0x4c14, 0x8b85, 0x4041, 0x5336, 0x553a, 0x3e65, 0x7155,
    0x13f4, 0xd44e, 0x8d37, 0x4b2b, 0x09bb, 0xe0bb, 0x401e, 0x379e, 0xabdd, 0xa0f4, 0x797d, 0x40ea, 0x690c, 0x0473, 0x851a, 0x2e66,
    0x732e, 0x9f9d, 0xce75, 0x2ee1, 0x0a02, 0x2c5c, 0xaace, 0x301a, 0x24db, 0x4924, 0xbbcc, 0x2758, 0x75ec, 0xafac, 0xc072, 0x8ee6,
    0x50aa, 0xf390, 0x8062, 0x2ed8, 0x964b, 0xe497, 0x4212, 0x5a02, 0x7cd0, 0xe17b, 0x18c7, 0xece7, 0x6eb4, 0x5f3f, 0xd2b2, 0x576d,
    0x0b4d, 0x549c, 0x14a2, 0x8ee3, 0xa661, 0x3da7, 0xe9da, 0x5cf0, 0xd408, 0xde82, 0xd693, 0x15a2, 0x3dcb, 0xdd09, 0x3141, 0x4f45,
    0xf621, 0x1f20, 0x8c68, 0xc481, 0x6b1f, 0xbcad, 0x7348, 0x87a1, 0x9ca3, 0xe865, 0x901f, 0xb17a, 0x24d3, 0xeb4e, 0x0ba8, 0x804d,
    0x26a2, 0x8f78, 0x2ddf, 0x16e0, 0x706a, 0x005a, 0xa6d5, 0xa72e, 0xb1a6, 0x412a, 0xf06d, 0xfc73, 0xc641, 0xd5c9, 0x78df, 0xa617,
    0x37b9, 0x50c5, 0xe880, 0x250c, 0x2c82, 0xab78, 0x1f83, 0xe1e7, 0x6c33, 0x20b8, 0x8c79, 0x99f5, 0x82f9, 0x5e44, 0x24f1, 0xf717,
    0x5d87, 0x8234, 0x2272, 0xce6c, 0xcb71, 0x58ce, 0xfa85, 0xb118, 0x8235, 0xe2ec, 0x2db6, 0x109b, 0x6a1c, 0x6174, 0x1f9c, 0x3591,
    0x2876, 0x7228, 0x1f6d, 0xf8be, 0x3af2, 0x1abc, 0x57cb, 0xab18, 0x774d, 0x2605, 0x9ba8, 0xc5ba, 0xb2fd, 0xddf7, 0xac8e, 0x08e7,
    0xcc54, 0x1299, 0x4f6e, 0xfaaf, 0xaa28, 0x49b7, 0xb24a, 0x9b62, 0xaea4, 0xcc3f, 0x92cd, 0x39e3, 0x1ec7, 0x1f81, 0xf73d, 0x4fe1,
    0x442b, 0x27ad, 0x5766, 0x4913, 0xf292, 0xa7db, 0x9d23, 0xadb0, 0xd580, 0xccba, 0x1e30, 0x37d8, 0x902e, 0x5779, 0xa889, 0xde23,
    0x95c6, 0x4d86, 0xe4c7, 0xc069, 0x5eac, 0x07e4, 0xba07, 0xd7c5, 0x3abd, 0xcbe7, 0x3576, 0xf3db, 0x36dd, 0x59a6, 0x8150, 0x1c25,
    0x5c1d, 0x06d4, 0x9a45, 0x7537, 0xb9a5, 0x0c8e, 0xb3e7, 0xf192, 0x9d6d, 0x8ac1, 0x1847, 0x656a, 0xe5c5, 0x35ee, 0xfd6e, 0x8969,
    0x7f1f, 0x8271, 0xba01, 0x6a01, 0x7807, 0x103d, 0x8186, 0xfb04, 0x76da, 0xbcf3, 0x0350, 0x53e8, 0x10f6, 0x1e3c, 0x1928, 0x52f3,
    0x0e16, 0x7c5c, 0xb696, 0x8edd, 0x553f, 0x0991, 0x1a98, 0xb405, 0x9193, 0x9baf, 0x2d99, 0x4c19, 0x9a89, 0xcf1a, 0x86c8, 0x1051,
    0xffa4, 0x8899, 0x40da, 0x268a, 0x6159, 0xa926, 0x9cbb, 0xc0c9, 0xec9b, 0xfac9, 0xc71d, 0x4429, 0x8e94, 0x2945, 0x7b3c, 0x0e19,
    0x5124, 0x2d9b, 0x04e2, 0xb839, 0x6816, 0x641b, 0x4d13, 0x6d2c, 0x3b9b, 0x9a4d, 0x8762, 0x2287, 0xf39d, 0x0510, 0x2fe5, 0x5f66,
    0x2cd9, 0x9e33, 0x936d, 0x75e3, 0x38a7, 0xcada, 0xaf8a, 0x3a46, 0xd502, 0xa82a, 0xa98d, 0xf2ac, 0xb772, 0xcbb8, 0x2755, 0xa555,
    0x36f3, 0x863f, 0xbdd3, 0x1317, 0x1538, 0xb4f8, 0x1080, 0x367f, 0x4228, 0xc8f4, 0x167c, 0x57a1, 0x405b, 0xa981, 0x634e, 0x46e5,
    0x4fc4, 0xfdac, 0x9737, 0x5310, 0xd69e, 0x93fb, 0x9452, 0xe948, 0x0cc8, 0x257b, 0x53b8, 0x93ba, 0x8ba9, 0x6c0c, 0x3a72, 0x52cb,
    0x5fd7, 0x200e, 0xa6d4, 0xafa3, 0x2452, 0xe70f, 0x44e5, 0x32df, 0x57d2, 0x4ced, 0x2ae8, 0xd87d, 0x9cb0, 0x985f, 0xc91d, 0x821a,
    0x180d, 0x5567, 0x9770, 0xe73a, 0x1bcf, 0x200f, 0xa595, 0xc69b, 0x5397, 0xd36a, 0x0b70, 0x96ef, 0xc3d0, 0x39a4, 0xe240, 0x4634,
    0x015c, 0x3012, 0xbe6c, 0x411f, 0x8b57, 0xca5b, 0xf574, 0xf7e3, 0xe2d1, 0xc2e5, 0x1970, 0x67cc, 0xa867, 0x7afe, 0x125c, 0x2a3b,
    0x8a8d, 0xfc1d, 0x79cd, 0x43c3, 0xde61, 0x074e, 0xa7b3, 0x2651, 0x9eb9, 0x406f, 0x3d3b, 0x2273, 0x628f, 0x2a53, 0xbf34, 0xf098,
    0x9d7d, 0x3c08, 0xb0fd, 0x4929, 0xf9ee, 0x4937, 0xf902, 0x73e1, 0x1d53, 0xf8cc, 0x7545, 0xde98, 0xafb1, 0xe6ab, 0xd219, 0xb847,
    0x90bb, 0x2537, 0x2c61, 0x5d34, 0x9249, 0x59c7, 0xc106, 0x89d8, 0xc48f, 0xfd97, 0xfde3, 0x4b39, 0xb62b, 0x9fa2, 0xf564, 0xe36d,
    0x6dd5, 0xd453, 0x36ca, 0x274f, 0x24c6, 0xfa6a, 0xad49, 0xeaf7, 0x7e77, 0x7b73, 0xa1a5, 0x4f75, 0x281c, 0x9373, 0xe0c0, 0x1d91,
    0x0478, 0x297e, 0xab3b, 0x71bb, 0xfa79, 0x45ce, 0xa83d, 0xeee8, 0xf412, 0xe67f, 0x74c4, 0x7e42, 0x056b, 0x62ba, 0xf7c2, 0xa0f9,
    0xe657, 0xc827, 0x3723, 0xf8f4, 0x61f2, 0xae86, 0x2a14, 0xe180, 0x5f44, 0x3338, 0xa6f2, 0x7f62, 0x58b3, 0x68ff, 0xd7f8, 0x566e,
    0x248e, 0x9349, 0x7d0b, 0x38e2, 0x0308, 0x4c9d, 0xe49c, 0x98fa, 0xd3fd, 0xf395, 0x2ac2, 0xc148, 0x4a69, 0x145b, 0x85fd, 0x1861,
    0xeac4, 0x7652, 0xbcf5, 0xfa0d, 0x21e7, 0x54a1, 0x8425, 0xeec2, 0x79e2, 0x3d6e, 0x3dac, 0xcb56, 0x966d, 0x3de3, 0xe163, 0x4a2f,
    0x7794, 0xb5e1, 0xbb7d, 0xbbc3, 0xdd0e, 0xd9c0, 0xaef8, 0x9b57, 0x072b, 0x73b2, 0x10b4, 0xde87, 0x1dc8, 0x6076, 0x42a2, 0xcfa5,
    0x1371, 0x2896, 0x904e, 0x491b, 0x6179, 0x2e0b, 0xf41a, 0x76fa, 0x2472, 0x01cc, 0xf744, 0xe2f1, 0xa898, 0x4fe4, 0xb792, 0x9793,
    0x3af6, 0x57d6, 0x926d, 0x2492, 0x3486, 0x8239, 0xd5ee, 0x507a, 0xe320, 0xeae4, 0x58d3, 0x2095, 0x9269, 0x75a7, 0xce51, 0xf432,
    0xea85, 0xabed, 0xa760, 0x923d, 0x3ad6, 0x85c6, 0xab7d, 0xf8e0, 0x6bd7, 0x50ca, 0x692c, 0x55f9, 0x708a, 0x9d4a, 0xcea7, 0x8255,
    0x0a30, 0xf313, 0x6332, 0x640a, 0xa25d, 0x49a7, 0xaef5, 0x20bd, 0x5e49, 0x2257, 0x1ef4, 0xf6a6, 0x81cf, 0x295f, 0xcd1a, 0xbb2b,
    0xeb53, 0x45b0, 0xd025, 0x9d6f, 0xcf48, 0x9b2e, 0x5165, 0x9cda, 0xaf4a, 0x6813, 0x8588, 0x87bf, 0xe37e, 0x9fef, 0x1f26, 0xe86a,
    0x8219, 0x1f25, 0x9fc7, 0x24d2, 0x5fd8, 0x8611, 0x04aa, 0x9a34, 0x4eb8, 0xe3e1, 0xd9f2, 0x5f23, 0x4a5a, 0x3f07, 0xbcb2, 0xfbf0,
    0x5637, 0x9884, 0x005f, 0x2e05, 0xc6aa, 0xa164, 0xf2c4, 0x210e, 0x74f2, 0x6ca3, 0x7c8e, 0x28b3, 0x1ca2, 0x8f7d, 0x73cb, 0xc1fc,
    0x296a, 0x1522, 0x67fe, 0x412f, 0xa042, 0x0bdb, 0xfd47, 0x5d6c, 0x9c2a, 0x8fc6, 0xce6d, 0x5ddb, 0xd5ce, 0xcaa9, 0x6380, 0xcff3,
    0x5fe4, 0xfffa, 0x6443, 0x2888, 0x8d73, 0x921a, 0x2c4c, 0x537e, 0x1566, 0x9f0d, 0x562f, 0xf203, 0xfe20, 0xbff1, 0x5115, 0x6d8d,
    0xca3b, 0xf0da, 0x50a3, 0xc5cc, 0x7c0b, 0x2bf8, 0xfef6, 0xf662, 0xd2d0, 0xbaa7, 0xcce1, 0xf0b2, 0x6b61, 0x1fdb, 0x2002, 0x1872,
    0x961a, 0xe59d, 0x24bf, 0xb25c, 0x415d, 0x4dd9, 0x28e8, 0x8be1, 0x0356, 0xeb32, 0xc96b, 0xf90c, 0x50c4, 0xe87e, 0x2e04, 0xbe6b,
    0xdff7, 0x7fc4, 0xa701, 0x1f93, 0x01ad, 0xf812, 0x32d8, 0xc79a, 0x8081, 0x43ff, 0x1a91, 0x8c28, 0xf554, 0x243a, 0x97fe, 0x41c0,
    0xc901, 0x96b9, 0x33cd, 0x9040, 0xf02b, 0x4868, 0xec76, 0xb5b4, 0x40ff, 0xfbd8, 0x1188, 0xf290, 0xa8c8, 0x5211, 0x4b1c, 0x8675,
    0x7848, 0xffac, 0x1940, 0xadc2, 0xcb5e, 0x2f84, 0x5523, 0xed45, 0x4587, 0xa6f9, 0x6419, 0x7a36, 0xbf57, 0x4d6a, 0x1eca, 0xe334,
    0x4864, 0x0520, 0xa3e8, 0x3588, 0x013c, 0x56bf, 0xee59, 0xe84e, 0xb9df, 0x8423, 0x2c86, 0x1968, 0x58b7, 0x1375, 0x1bd3, 0xaea8,
    0xeb55, 0x5485, 0xead9, 0x4d98, 0xdfad, 0x312d, 0x1aff, 0xcacd, 0x9cd8, 0xd100, 0x045c, 0xa785, 0x1ef0, 0xec42, 0xc110, 0x57fc,
    0x4f7b, 0xad53, 0xb4b5, 0x76ec, 0x85fa, 0x18b1, 0x6686, 0x5f01, 0x7112, 0x82d2, 0x06e3, 0x5849, 0x1950, 0x5f04, 0x94a8, 0x6c8c,
    0x6256, 0x5ca1, 0x9d33, 0x6a13, 0xbafd, 0x4cc7, 0x3192, 0x8f6d, 0x6a4d, 0x57bf, 0x55a1, 0x64f0, 0x5f96, 0xd55c, 0xf982, 0x445e,
    0xc2c5, 0x20a0, 0x1d2c, 0xfd80, 0x5658, 0x49aa, 0x5bc2, 0x63c9, 0xfa53, 0xbb12, 0x49e6, 0x5a42, 0xf027, 0xb1fa, 0x27eb, 0x6fb2,
    0xf6a2, 0xaa91, 0x56e1, 0x0ca0, 0x5ada, 0x763b, 0x4820, 0x99e6, 0x7b31, 0x7f7b, 0x62e6, 0xa851, 0x29bf, 0x1626, 0x1444, 0xb221,
    0x4436, 0x8882, 0xdb1f, 0x616b, 0xb46e, 0x3f5f, 0x214a, 0x38ee, 0xcb69, 0x7666, 0x35d7, 0x4635, 0x1030, 0x7fe8, 0x3034, 0x9116,
    0xf541, 0x1f27, 0x30ea, 0x0e2b, 0xa847, 0x1e03, 0xddb7, 0x25ee, 0x7e53, 0x4c2c, 0x2d0d, 0xaa7b, 0x07cd, 0xbe17, 0xdae9, 0xf05c,
    0x2b0c, 0x37fb, 0x0cd7, 0xb6a8, 0xf021, 0x82fa, 0x6bf5, 0x13c0, 0x6509, 0x9162, 0x219a, 0x5c5b, 0x9731, 0x2d84, 0xb478, 0xb970,
    0xe6f8, 0x3e20, 0xdbc0, 0x9bc1, 0xf0d0, 0x735e, 0x9b8a, 0xe2c2, 0x2a1b, 0x57ec, 0xa6ac, 0x4058, 0x7fc5, 0x110c, 0xe40c, 0xdc42,
    0x21f4, 0x59ba, 0xdf64, 0x4fd6, 0x9e99, 0x3aae, 0x63f5, 0xe04f, 0xd4b8, 0x760f, 0xe306, 0x4958, 0xf35a, 0xb0d1, 0xd177, 0xc4f7,
    0x5662, 0xa15c, 0xb484, 0x93cc, 0x0a7b, 0xc508, 0x7625, 0xf4a7, 0x582b, 0xd315, 0xa518, 0x7d12, 0x1784, 0x8a32, 0x71e3, 0xd624,
    0x6bf4, 0x0f23, 0xd012, 0x1092, 0x05e0, 0x11e4, 0x032b, 0x197b, 0x2253, 0x998a, 0xe4a6, 0x7217, 0x0b42, 0x85c3, 0x1afc, 0xf98d,
    0xef00, 0xa207, 0x0061, 0xa993, 0xec72, 0x14d0, 0x78ad, 0x3921, 0x8089, 0xb1b2, 0x570f, 0x0705, 0xee24, 0x109a, 0x9eb8, 0x8fc5,
    0xe6b8, 0x6598, 0xc792, 0xb784, 0xe11f, 0x5ae4, 0x9354, 0xacb0, 0xd29c, 0x1e48, 0x41f5, 0x271f, 0xbc8a, 0xebee, 0x11ef, 0x44d4,
    0xd735, 0x3546, 0xfb01, 0x3a58, 0xab65, 0xd61e, 0x4140, 0x858b, 0x335f, 0x2f05, 0xb7a8, 0x12a1, 0xbf14, 0x3c02, 0x754d, 0xb054,
    0x0d3d, 0x2399, 0x0a74, 0x8774, 0x10dc, 0x4f21, 0x8a09, 0x7a2a, 0x4c90, 0x7f4c, 0x9ea9, 0x789a, 0x8cf7, 0xb659, 0x7d4b, 0xc9f0,
    0x2a33, 0xd3df, 0x67a5, 0x2dad, 0x77a4, 0xf940, 0xe2bb, 0x5e6d, 0x6021, 0x3c35, 0x551c, 0x3eb6, 0x712f, 0xbeed, 0x5e15, 0x2a1e,
    0xaf02, 0x35ae, 0x70b0, 0xe2e3, 0x3549, 0xcb0a, 0x052f, 0x5f33, 0x97e4, 0x4b96, 0x8dc3, 0xdb51, 0xe19d, 0x7a9e, 0x0b7c, 0xf82b,
    0x751a, 0x508b, 0x454f, 0x4131, 0x1551, 0x8d6d, 0x6545, 0x2466, 0x2631, 0xd357, 0x1b1e, 0x28b9, 0x84b7, 0x92c7, 0xf14b, 0xc023,
    0x9960, 0xe538, 0xf230, 0xbf46, 0x9e09, 0xc27f, 0x84d5, 0x5b8b, 0x6aa6, 0x8b2c, 0x52a7, 0x229c, 0x8ee0, 0xb0a9, 0xb8cd, 0xd347,
    0xbd6b, 0x2f48, 0xb7d5, 0x0760, 0xde41, 0x7d52, 0x745a, 0x4163, 0x7050, 0x70f5, 0x8604, 0x9575, 0x7316, 0x8cd8, 0x470f, 0x07b3,
    0xfbfd, 0xc5aa, 0x1820, 0x2464, 0x0646, 0x77bd, 0xd64f, 0x64df, 0x9135, 0x9c1f, 0xe241, 0x283a, 0x43a1, 0xdfd1, 0x1c4b, 0x7586,
    0xe86b, 0x5811, 0x78ab, 0x822c, 0x5ecb, 0x842f, 0x9543, 0xb6de, 0xefb5, 0x447c, 0x1d13, 0x9f48, 0x15d3, 0x2b58, 0xa17d, 0x9e4d,
    0x5f8a, 0x1e01, 0x99af, 0x9782, 0x5e45, 0x75f7, 0x694e, 0x0f24, 0x0bc2, 0x4519, 0xac15, 0xe98a, 0x79ad, 0xd868, 0x6a5c, 0xbb07,
    0xdfab, 0x26b5, 0xa2c3, 0xd37c, 0x5464, 0xa908, 0xa07f, 0x7dec, 0xb5b0, 0x8fed, 0x6968, 0xdd53, 0x7f10, 0xdff8, 0x0ab3, 0xcf86,
    0xabea, 0x166c, 0xd5bd, 0xead6, 0x33c9, 0x45f7, 0x7f0a, 0xb9ef, 0x7b94, 0x446f, 0x84e8, 0x9df5, 0x9a33, 0xa594, 0x0059, 0x592a,
    0xe1fd, 0x40c8, 0x9c1e, 0xcb68, 0xc3b0, 0x7178, 0x0d60, 0xa678, 0x295b, 0x1ed7, 0xb684, 0x5bd5, 0x0a46, 0x5611, 0xd9f8, 0xadf2,
    0x1f5b, 0x2a8e, 0x150f, 0xaf0a, 0x3c4d, 0xcf54, 0x64f8, 0xbea5, 0x8382, 0xab87, 0xc7e2, 0x4f5c, 0xb90b, 0x7253, 0xfcc6, 0x0d7e,
    0xd3c2, 0x022e, 0x2bfe, 0x6088, 0x0cb4, 0x1643, 0x5754, 0x8de9, 0x4614, 0x8d48, 0x20e0, 0x4bff, 0x7c86, 0xe4b5, 0xdf35, 0x1702,
    0x50d2, 0x9beb, 0xbe5a, 0x58c5, 0xd1ea, 0x973f, 0xf035, 0x19ce, 0xcbbb, 0x79bb, 0x8eee, 0xda83, 0x0b50, 0x0dd0, 0x69d1, 0x8d05,
    0x3937, 0xc281, 0x0938, 0xe192, 0xa6c2, 0x823b, 0xc44e, 0x3608, 0xb919, 0xc7a7, 0xe1c1, 0x66ad, 0x952f, 0x0154, 0x0eda, 0x975e,
    0xd34a, 0x7a6e, 0x68e5, 0x2ad4, 0x946a, 0x9725, 0x7e31, 0xea3c, 0x61bc, 0x75c4, 0x1b91, 0x3a9b, 0x669f, 0x4bd8, 0xbdc1, 0x8079,
    0xc581, 0x22d9, 0x5729, 0x935b, 0xe3c3, 0x3999, 0xcd46, 0x9b7b, 0x04d0, 0x8def, 0xa0bf, 0xbacd, 0xaeff, 0xe8de, 0x5e79, 0x69fe,
    0xaa9c, 0x5ced, 0x9467, 0xf424, 0xf2f1, 0xe5ac, 0x36b8, 0xbd18, 0xe71a, 0x3524, 0xe527, 0x47b4, 0x1610, 0xab29, 0xf973, 0xad1e,
    0xb0eb, 0x4690, 0x30cb, 0x71cd, 0xe975, 0xa0ed, 0xc30a, 0xfecd, 0x6f0c, 0x195d, 0x10e2, 0x2c4f, 0x4e7b, 0xc34c, 0xae5c, 0x8531,
    0xcdb9, 0xbb6b, 0x119c, 0xe0d2, 0x17ed, 0xe6a4, 0x8d35, 0x0952, 0x18ea, 0x7083, 0xbce3, 0x7d75, 0x0ecc, 0xb903, 0x93ea, 0x0ef2,
    0x68af, 0x1255, 0xd308, 0xfa7c, 0x01f1, 0xc737, 0x57a7, 0x7cf9, 0xc651, 0xdfb7, 0x596a, 0x4e47, 0x3711, 0x8962, 0x60b2, 0x74b9,
    0xb9a3, 0x1cb0, 0x7098, 0x925b, 0x282a, 0xbb9a, 0x13ba, 0x967b, 0x903c, 0x39a5, 0x40c9, 0x9a97, 0x9298, 0xa875, 0x4069, 0xd765,
    0x1fef, 0xca59, 0x41fc, 0xe37f, 0x81cb, 0x6320, 0xd5f8, 0x9ef3, 0x2e86, 0x8307, 0x6ec2, 0x2ef8, 0xbc07, 0x10bb, 0xa74e, 0x2b3b,
    0x5c41, 0xe311, 0xf900, 0xb10f, 0xd013, 0x931c, 0x3b7a, 0x24f2, 0x568e, 0x42ad, 0xe958, 0xfa2d, 0x0146, 0x7e62, 0x89f8, 0x9fb5,
    0xde43, 0xea1b, 0x004d, 0xf8de, 0x617b, 0x5408, 0xc0e9, 0x3bcc, 0x33e2, 0x67ec, 0x32ff, 0xe437, 0xa575, 0xedfa, 0x1f94, 0x5330,
    0x1fee, 0x1894, 0x30e9, 0x822b, 0xc13d, 0xfde9, 0xfc08, 0xf638, 0x6ceb, 0x0c56, 0x066f, 0x036f, 0x9894, 0x3fbb, 0xa268, 0xa40d,
    0x2594, 0x8a45, 0x8d7d, 0x5f35, 0xf9ba, 0x3919, 0xba9a, 0x20bf, 0x65ac, 0x6975, 0x8951, 0xd7a6, 0x9caf, 0x9fee, 0x310f, 0x804c,
    0x9099, 0x8b41, 0x5624, 0x5177, 0xbc34, 0xcc8f, 0x92a0, 0xc1f4, 0xfd51, 0x1e09, 0xa465, 0x852e, 0xa6b4, 0xdf89, 0x022c, 0x981f,
    0x687e, 0x7554, 0xed8c, 0xa001, 0x0423, 0x1cd8, 0x7290, 0xe418, 0xc9a9, 0xdad9, 0xdf00, 0xb191, 0xb7fa, 0x66f8, 0xe16a, 0xb0e9,
    0x1fa4, 0x7f65, 0xd791, 0xd5e0, 0x890b, 0xd2ef, 0xca53, 0x7c15, 0x7dea, 0x31d8, 0xaf52, 0x11c1, 0xcd16, 0xb809, 0x9f79, 0xe742,
    0x96b5, 0xf1c9, 0x46b6, 0x5d7e, 0x878e, 0x3852, 0x08c2, 0x58a3, 0x32bf, 0x413e, 0x9c43, 0x1470, 0x12e2, 0xc1a3, 0xa502, 0xa9f2,
    0x9519, 0xe9ef, 0x3bd2, 0x7ca0, 0x869e, 0x91cc, 0x086e, 0xa790, 0x7780, 0xd103, 0x7639, 0x0a68, 0x35fa, 0x8791, 0x02f0, 0x08f2,
    0xf5aa, 0xaa42, 0xefd6, 0x9896, 0x2432, 0x0290, 0x009e, 0xab5f, 0xeffb, 0x3fe2, 0x80d6, 0x7c09, 0x4b0d, 0xf2ce, 0xa0ae, 0xa6ec,
    0xbb27, 0x9e0f, 0x04b4, 0x2484, 0x8c56, 0x28d9, 0x4183, 0xed56, 0x0f85, 0x7237, 0xe06f, 0x5b21, 0xb074, 0x03f6, 0x7064, 0x2dcd,
    0xfb08, 0xf2b0, 0xe86e, 0x492d, 0x41e0, 0xeceb, 0xedfd, 0xc5ec, 0x6cac, 0x2260, 0x3341, 0xfda0, 0xc8fd, 0x4078, 0x260e, 0xbcfc,
    0x9597, 0x47d4, 0x0972, 0xce63, 0x5350, 0x3fc6, 0x836f, 0xe39f, 0x8d25, 0x2abf, 0x82cf, 0x2af4, 0x092a, 0x4c1f, 0xa698, 0x7e96,
    0x983f, 0x6e79, 0x6547, 0x824b, 0xc7fa, 0x1490, 0xab7f, 0x866f, 0x4167, 0x3eba, 0xbe6f, 0xb6ac, 0xbd1c, 0xda87, 0x8050, 0x826b,
    0xbfbb, 0xe1ba, 0xd0de, 0x3ae8, 0x57b2, 0xcc80, 0x3472, 0xbe4f, 0xc3d1, 0xecc1, 0x4189, 0xe1fe, 0x0440, 0xe430, 0x8b9e, 0xa808,
    0x6d7a, 0x1895, 0x9ff0, 0x8267, 0x8f31, 0x3eb3, 0x4225, 0x516f, 0xdaae, 0x65a5, 0xf525, 0x94fc, 0xa11b, 0xb54b, 0x3171, 0xdd3b,
    0x1ae0, 0x9ec8, 0x240e, 0x6344, 0xc6ea, 0x1093, 0xf718, 0xa3a7, 0xd85d, 0x84b0, 0x6dc6, 0x3e9a, 0xc273, 0x01b7, 0xeb15, 0x48d1,
    0xd10c, 0xdae2, 0xecca, 0x2269, 0xab90, 0x8df8, 0x352d, 0x8310, 0x4522, 0x70fe, 0x1e51, 0xd31e, 0xbb1b, 0x57f5, 0x9f16, 0xa702,
    0xb873, 0xbde4, 0x88bc, 0xf305, 0xe7c8, 0x328b, 0xaab9, 0xbf2c, 0x42fb, 0x3c9b, 0x98e4, 0x809e, 0x2ba6, 0x56b0, 0xb602, 0x0731,
    0x3ea2, 0xacbc, 0xc9e0, 0xab42, 0x873b, 0xde4b, 0xaf7e, 0xd49a, 0x3a26, 0x3e91, 0x2b60, 0x1073, 0xdf6b, 0x88f8, 0xa296, 0x2152,
    0x25c4, 0x8347, 0x5067, 0x99ec, 0x4a05, 0x53e5, 0x97e1, 0x3771, 0xc6da, 0xa432, 0xac22, 0x148c, 0xc573, 0x5037, 0x5be5, 0xb3f1,
    0x657e, 0x827c, 0xc7d5, 0x03aa, 0x3887, 0x28e0, 0xe776, 0xf6f8, 0x8290, 0x4de4, 0x3dae, 0x52b6, 0xe763, 0xf3c3, 0xb7aa, 0x6d09,
    0x9e13, 0xb80d, 0x1edb, 0x6324, 0xaa95, 0xec46, 0x998e, 0x75fb, 0x2a87, 0x6dbd, 0xa04e, 0x48bb, 0xbd96, 0x085f, 0x2bad, 0x6fd7,
    0x7c99, 0x17e7, 0xd426, 0x3a67, 0x0b3a, 0xf5d1, 0xb942, 0xc4ac, 0xf156, 0x0459, 0x50c7, 0x1b84, 0xd0d7, 0xb022, 0x1897, 0xb024,
    0x0f1d, 0x70a4, 0xf9fe, 0xee37, 0x1184, 0xb146, 0xa03a, 0x5c7d, 0xa0f3, 0xe834, 0xe2f0, 0x8761, 0x934d, 0x75ab, 0x4cf1, 0x1ac0,
    0x2d6b, 0xe393, 0xf567, 0x8c70, 0x8d6c, 0xbafc, 0xc5eb, 0xc309, 0x49a3, 0xa04a, 0x8190, 0xc3fb, 0x2a43, 0xac6d, 0x96d1, 0x383d,
    0xefd4, 0xb825, 0x3fa1, 0x20af, 0xd4e2, 0x1aa2, 0x770d, 0x6da6, 0x2cae, 0xe94b, 0x1218, 0xd655, 0xbae5, 0xbbcf, 0xdcea, 0x9f58,
    0xe394, 0x8265, 0x26ed, 0x4dbb, 0x723e, 0xe8f2, 0xc9a1, 0x6d3f, 0xabcc, 0xf38a, 0x5699, 0xde89, 0x276e, 0x00f6, 0xe564, 0x2721,
    0x1a8b, 0xcb0d, 0xd3c0, 0x51f0, 0x37b1, 0x18ed, 0x974b, 0x260b, 0xf28c, 0x9e84, 0x8096, 0x8490, 0xcd38, 0xb287, 0xd06c, 0xb369,
    0x72cf, 0x4277, 0xf7c9, 0x468e, 0xa259, 0x48b7, 0x0afc, 0x1a12, 0x1b55, 0x84a7, 0x87e1, 0xb8a4, 0x4e6a, 0xd17e, 0xc00f, 0x155b,
    0xc6f0, 0xd195, 0xa314, 0xa24f, 0xa07d, 0x6f60, 0x44f6, 0x00d7, 0xd058, 0x9d16, 0xd6e2, 0x6135, 0xa679, 0x1208, 0x58f2, 0x96f0,
    0x9cc5, 0x2336, 0x23b8, 0x6c2a, 0xca6f, 0x8589, 0xfc09, 0xac7e, 0x669c, 0xd943, 0x7946, 0x4f42, 0x2735, 0x68bf, 0x8daa, 0xc253,
    0xbcd6, 0x6c34, 0x05e1, 0xa28c, 0x3f88, 0x6ffc, 0x5ad8, 0xc7f6, 0x4770, 0xd854, 0x3553, 0x4596, 0x398b, 0x466c, 0x3828, 0xb87a,
    0xcb98, 0x16c2, 0xb284, 0x48b1, 0xbfe2, 0x0886, 0x950d, 0x2bf6, 0xf813, 0x58fd, 0xfd29, 0x5d89, 0x94df, 0x0b13, 0xbd98, 0xbfbd,
    0xa36e, 0x613d, 0xd918, 0x2951, 0x8418, 0x69a9, 0xbe08, 0x32a0, 0x3896, 0xeb0c, 0x2791, 0xdbd1, 0x8742, 0xbfa3, 0x91c9, 0x4502,
    0x731e, 0x4b90, 0xb092, 0x0dc6, 0x5e4f, 0x63d1, 0x05a5, 0xe224, 0xc483, 0x5074, 0xe077, 0x886e, 0x226b, 0x383f, 0xe7d3, 0x4698,
    0x9a2d, 0x7013, 0xf407, 0xd2fe, 0x3ef3, 0xce85, 0xd9a4, 0xb3b9, 0x11cd, 0xee7a, 0x4b29, 0x3467, 0xaef1, 0x6db9, 0xb254, 0x00b2,
    0xfbd4, 0x63b0, 0xe5f6, 0x24e8, 0x5ea5, 0x2382, 0x2d48, 0xf753, 0xcad3, 0x069f, 0x88de, 0xf728, 0x375e, 0xd936, 0x3beb, 0x09d1,
    0xe634, 0x546e, 0xbe02, 0xcd0c, 0x82c2, 0xca1a, 0x3162, 0x0bf5, 0xac9f, 0xc9be, 0x51fa, 0xbd2b, 0x0c8c, 0xef7a, 0xfca0, 0x9982,
    0x2c28, 0xa1ac, 0xedd8, 0x696b, 0xf37d, 0xb565, 0x5aa7, 0x9ef6, 0x3040, 0x48c8, 0xed69, 0xb93f, 0xf7fb, 0x8b55, 0xa51f, 0xbbd2,
    0x1217, 0xa5df, 0xb4cf, 0xf70e, 0x94a7, 0xf82a, 0x160f, 0x03f5, 0xda57, 0x5f14, 0x8bee, 0x6792, 0x69f0, 0xad3c, 0x73df, 0xfe14,
    0x3f48, 0xfeca, 0x17bd, 0x8241, 0xaf23, 0xabc1, 0x2fed, 0x407f, 0x5f46, 0x2ee0, 0x2cd8, 0x57d5, 0x6023, 0x151a, 0xd5ad, 0xab7b,
    0x7655, 0x74e2, 0x88f2, 0xf698, 0xba11, 0xbb54, 0x3e84, 0x374b, 0xe8b0, 0x34df, 0xe66b, 0xa5e0, 0x36f0, 0x66f0, 0xc335, 0x2daa,
    0x63fb, 0x2d6c, 0x5146, 0x82f0, 0x15fb, 0xca86, 0xa458, 0x5942, 0x9305, 0xcba5, 0x28f8, 0x69e0, 0x0d09, 0x057e, 0x2347, 0xfbe4,
    0x0792, 0x34a7, 0x4bc1, 0xccd7, 0x3ef6, 0xd03f, 0x69be, 0xd161, 0xadc5, 0xc26a, 0x5fa3, 0x7918, 0xa0b1, 0x3a2d, 0x03b0, 0xdbea,
    0x09e0, 0xb5fa, 0x5b54, 0x866b, 0x7161, 0x4dc5, 0xcde0, 0x6de0, 0xb1e4, 0x2de1, 0x7ec0, 0x0e96, 0x4cf3, 0x2410, 0x0650, 0xab70,
    0xfdd2, 0x6650, 0xb74c, 0x5e3b, 0x3d47, 0xd23c, 0x8a68, 0x38cc, 0xb819, 0xd277, 0xad8e, 0xdac2, 0x31a3, 0x0d61, 0x0b71, 0x3390,
    0x8410, 0x9d2d, 0x0e40, 0x2f3e, 0x87c0, 0xea0b, 0xf2b7, 0xf639, 0x8a77, 0xf397, 0x7ee6, 0xbc3a, 0x3b39, 0x7f4e, 0xb97b, 0xacf3,
    0x20b9, 0x2a83, 0xed31, 0x11e5, 0x5104, 0xa067, 0xe9c4, 0xecaa, 0x4629, 0x449f, 0x736b, 0x5ed5, 0x8de1, 0xa32b, 0x8d95, 0x044c,
    0xad50, 0x6e62, 0x6e96, 0x7d08, 0x6217, 0xf780, 0x76a9, 0x7423, 0x89ec, 0x01ae, 0x03df, 0x95df, 0x40fb, 0xdec0, 0xcc05, 0x762c,
    0x520d, 0x2c06, 0x2f92, 0x50bc, 0x1e11, 0xec31, 0x5916, 0x4cd5, 0x843d, 0x078f, 0x7971, 0x8d7b, 0x529a, 0xc516, 0xd62c, 0xda3f,
    0x3ec1, 0xa061, 0xbc64, 0xecf9, 0xa63e, 0x3927, 0x3860, 0x0a85, 0xb852, 0x7186, 0x8249, 0xc4f9, 0x632e, 0x085b, 0xba4b, 0xa0fb,
    0xfdf8, 0x3d5d, 0x4994, 0xe9ec, 0x8843, 0x3cb1, 0x175b, 0xff51, 0x3b5b, 0x3935, 0x11a9, 0x88c2, 0x61ae, 0xf57e, 0x82a5, 0xaa6b,
    0xa961, 0xde59, 0xf5df, 0xdd1b, 0x8597, 0x670e, 0xd220, 0xe900, 0xea19, 0x9ebf, 0xd8a3, 0xca94, 0x8728, 0x63df, 0xb573, 0x72aa,
    0x7ee9, 0x3328, 0x9ea3, 0x691e, 0x4208, 0xce96, 0x43e0, 0xf505, 0xbb2a, 0x3a71, 0xdd08, 0x5daa, 0xb1fd, 0x16b6, 0x8afd, 0x6543,
    0x6378, 0xe8ca, 0xd03e, 0x37b0, 0xce62, 0x119b, 0xe537, 0xc2c4, 0x77ea, 0xdc12, 0x6a71, 0x0d51, 0x71ca, 0xc132, 0x391f, 0x7479,
    0xfdfe, 0x62d5, 0x0323, 0xbbde, 0xf435, 0xac08, 0xaf65, 0xc217, 0x5781, 0x1ad7, 0x9aa4, 0x6585, 0x3a8d, 0xa845, 0x8aa8, 0xc6b6,
    0x221b, 0x4441, 0x5a37, 0x9faf, 0xfaa0, 0x8f93, 0xd423, 0x8f01, 0xa7bd, 0xd6a9, 0x42fd, 0x8c58, 0x312b, 0xae50, 0xdd7e, 0xa663,
    0x861f, 0x92e2, 0x547f, 0x8247, 0x0346, 0x59d5, 0x4cab, 0x44ef, 0xb4d0, 0x49c5, 0x104b, 0x5c76, 0x201d, 0x441a, 0x7863, 0xcae8,
    0x41a4, 0x01d2, 0x8c71, 0xce7e, 0x08dd, 0xaa5d, 0x65c7, 0xb104, 0x0068, 0x633b, 0x372c, 0x2c6a, 0xbddc, 0x79d6, 0x1f76, 0xba0a,
    0xed84, 0x1535, 0x5e6a, 0x2503, 0x8a83, 0x2a9e, 0xe8cb, 0xdc05, 0xfa19, 0xec61, 0xc58e, 0x80b9, 0xbdb3, 0xd95e, 0x72ea, 0x6d5a,
    0xfc30, 0x1497, 0x29f3, 0xab8a, 0xb4ee, 0x4d32, 0xee41, 0x9e9c, 0xbc7f, 0x6729, 0x71e5, 0x8c73, 0x787e, 0xec7c, 0xe0c2, 0x1c5f,
    0xe0a7, 0x460c, 0xbed5, 0x707c, 0xd20f, 0xb2bf, 0x7495, 0xe562, 0xfeb1, 0x2405, 0xe76a, 0x54e5, 0xa8c4, 0xd36b, 0x7179, 0x7b8d,
    0x6406, 0xbd92, 0xa59f, 0xa629, 0xc13e, 0x61a0, 0x6d07, 0xaf4b, 0x365f, 0x8fa0, 0xeced, 0x3e93, 0xa49f, 0x18ae, 0xe499, 0xfba2,
    0x032c, 0xf5e8, 0xbede, 0x8c7a, 0x3acc, 0x3b37, 0xbc59, 0x1c44, 0x05ea, 0xf7d2, 0x1ee4, 0xc9e9, 0x4bca, 0x6e9f, 0xd921, 0xede1,
    0x3bdb, 0xed95, 0xd0e7, 0xe877, 0x1518, 0x5732, 0x9470, 0x4205, 0x99b8, 0xb7de, 0xc79b, 0xb48d, 0x1d35, 0xdbc9, 0x644c, 0x1949,
    0x6d61, 0x56c7, 0x19c8, 0x85b8, 0x5e1d, 0x3f73, 0xd679, 0xdcbd, 0x52f0, 0xf335, 0x16d5, 0xe19a, 0x34f0, 0x147c, 0x7df2, 0x91a3,
    0xb09a, 0x6b71, 0x4b78, 0x2c79, 0x27a1, 0x3ca3, 0xe129, 0x46d5, 0xeb2a, 0x090c, 0x4fac, 0x6e75, 0xef44, 0xab4c, 0x9390, 0x72b2,
    0x141d, 0xf120, 0x3ac3, 0x8e25, 0x4fa4, 0x8e89, 0xcf26, 0xd0be, 0xeda8, 0xc6e1, 0xfc15, 0x05be, 0x945c, 0x0d8f, 0xe011, 0xf8a5,
    0xa31a, 0x9aeb, 0x488b, 0x181a, 0xd53d, 0x9686, 0x782e, 0xed74, 0xac24, 0x8371, 0x3646, 0x4a54, 0x3278, 0xaad0, 0x222f, 0x7cc1,
    0x787d, 0xc451, 0xc00e, 0xab6f, 0xc650, 0x3eb9, 0x62e5, 0x9574, 0xf30f, 0x2ba9, 0x4981, 0x5dd3, 0xff65, 0xf123, 0x3e33, 0xc754,
    0x93db, 0xfeab, 0x47db, 0xbe2f, 0x4b18, 0x174d, 0x6c3f, 0x524a, 0x1537, 0x85c5, 0xbe3b, 0x5a01, 0xae18, 0x9fa4, 0x1c5c, 0x26c8,
    0xef74, 0xc4c5, 0xe5cd, 0x14c4, 0x29d8, 0x648f, 0x98cc, 0x9902, 0xd8e1, 0xea68, 0x08ff, 0xd722, 0xea2e, 0x8ac4, 0x55e1, 0xe2a1,
    0xff22, 0xffd7, 0x3b2e, 0x2588, 0xc10d, 0x14f2, 0x2fc6, 0x9d47, 0x323d, 0x108a, 0xc95e, 0x0332, 0x9432, 0xdaf5, 0xc895, 0x5792,
    0x380a, 0x21ce, 0xbc50, 0x922f, 0x0a2c, 0x6fd3, 0xaf94, 0xe7c0, 0x4a0c, 0xf70f, 0x333e, 0x54c7, 0x86fa, 0x90f7, 0x8710, 0x6279,
    0x184b, 0x4d17, 0x9fcb, 0xf568, 0x8b89, 0xe9de, 0x563a, 0x8b7e, 0x8671, 0x52b8, 0xf956, 0xfc6c, 0x37a0, 0x5ccf, 0x7b47, 0x6bb0,
    0xb93c, 0x250a, 0x6743, 0xf1b5, 0x299c, 0x6e40, 0x668c, 0x6379, 0x49d9, 0x13ab, 0x8f3e, 0x185a, 0x68d7, 0x677c, 0x7ce0, 0x64c2,
    0xa12b, 0xd67d, 0xd042, 0x1f7a, 0xfd2d, 0xe77a, 0xb4d3, 0x03b4, 0x52ab, 0x8a0d, 0xa705, 0xe410, 0x10e6, 0xc452, 0x30ed, 0x8ba2,
    0x8e60, 0x218d, 0x12dc, 0xea77, 0xb1d8, 0x1730, 0xf612, 0xa7d9, 0xafde, 0x35cc, 0xa127, 0xa33c, 0x5398, 0xac39, 0xd1d4, 0xc3b1,
    0xf27d, 0xa391, 0x1c3b, 0x4d1d, 0x5cc3, 0xfdea, 0x6814, 0x983b, 0x1e69, 0xa39e, 0xe4ad, 0xe4e5, 0x51b3, 0xdee6, 0x1144, 0x9e81,
    0x255b, 0x197c, 0x99f6, 0xe1de, 0xa2b7, 0xeec0, 0x91c1, 0x34b7, 0xd2df, 0x77ae, 0xda94, 0xf475, 0x7a60, 0x17f3, 0x0cf4, 0x208a,
    0xdf4e, 0x835e, 0xce07, 0x4c26, 0x5163, 0x61b9, 0x159f, 0x2f53, 0xee26, 0xfc32, 0xd0a6, 0x32d9, 0xafb3, 0x8107, 0xb001, 0x9b39,
    0x7208, 0xd382, 0x45d1, 0x9876, 0x0c2d, 0x479f, 0x3261, 0x3e70, 0x996c, 0x6853, 0xcd9c, 0xd800, 0xfa3a, 0x6d4a, 0x1045, 0x067a,
    0xc639, 0xb8f2, 0x8e2f, 0x7061, 0xc05c, 0x62c7, 0x36ad, 0x3975, 0xda46, 0xe3cd, 0x8ca4, 0x3226, 0xe4f4, 0x0f72, 0xf6f0, 0xec90,
    0x5b56, 0xdf37, 0xc135, 0x4028, 0x157a, 0xc167, 0x3f4b, 0x534c, 0x698f, 0x8f28, 0x5381, 0x4f8b, 0x1f4d, 0x36e3, 0xa468, 0xf58a,
    0xa723, 0x2cb5, 0xba5c, 0x3059, 0xbeba, 0xde71, 0x0779, 0x49f5, 0xf21b, 0x997f, 0x2998, 0x0fca, 0xfd16, 0x74ac, 0xcfda, 0x44fc,
    0x8373, 0x763d, 0xdf39, 0x0051, 0x3196, 0x641d, 0xd17b, 0x1824, 0x8a6c, 0x2795, 0x189b, 0x26f1, 0x9474, 0xd8a7, 0x55e5, 0x6747,
    0x6203, 0x3e54, 0x026c, 0x5d40, 0x5323, 0x0315, 0xe348, 0xc8d5, 0xaaf8, 0x63a4, 0x0250, 0x0270, 0x7da5, 0x45f1, 0xa488, 0xadd1,
    0xc7b8, 0x3d1d, 0xf1d1, 0x0536, 0xce4b, 0xfcfd, 0x60d7, 0x8ef6, 0x7a32, 0xa4f6, 0x78e3, 0xd334, 0xaefc, 0x1ef8, 0x1260, 0x576a,
    0x5a88, 0x99d2, 0x6197, 0x1763, 0x3ad2, 0x1b80, 0xaad8, 0x007e, 0xcf60, 0x3eaa, 0xe08c, 0x9706, 0xdbd9, 0x267d, 0x6adb, 0xd92e,
    0x0d80, 0xccd9, 0x6cfe, 0x2100, 0x4a99, 0x6905, 0x69f1, 0x2a70, 0xe589, 0x421c, 0x1fb4, 0x2668, 0x8d55, 0x42c9, 0xe922, 0xe547,
    0xd4e9, 0x6567, 0x262e, 0x7ba7, 0x3492, 0xc209, 0x0c7f, 0x6de6, 0x00be, 0x5c0a, 0x2b8f, 0x9c63, 0xac6e, 0x3109, 0x024c, 0x4aed,
    0xd4cb, 0x67c5, 0x756d, 0xebb4, 0x6415, 0x83b8, 0x71ba, 0xe4c6, 0x747a, 0xb4bb, 0xcc2a, 0x1b3e, 0x64ea, 0x1840, 0x6a7c, 0x43b6,
    0xddd7, 0x1579, 0x3e34, 0xa6cc, 0x8336, 0x1d4c, 0x94c8, 0x62a6, 0x85c2, 0x50c3, 0x981e, 0xfcc5, 0xee79, 0xc6d9, 0x05bd, 0x11a8,
    0x5bd6, 0xb2a4, 0x8dca, 0xc69c, 0x772d, 0x7758, 0x5303, 0x80b6, 0xe796, 0x83f9, 0x0246, 0x2b80, 0x3944, 0x1efb, 0x4d11, 0x1987,
    0x5ac7, 0xb8d0, 0xaf42, 0x2cf8, 0x15e4, 0xf427, 0x91e9, 0x8450, 0xf91c, 0x5166, 0x0670, 0x2b75, 0xe9e4, 0xd946, 0x769d, 0xadae,
    0x565a, 0xedaa, 0xcdbf, 0xa725, 0x38a9, 0x9a16, 0xd1f4, 0x336e, 0xc59a, 0x47fb, 0xc8b5, 0x3fc2, 0xcf46, 0x2c83, 0x2254, 0x16f5,
    0xc8bf, 0xf5ff, 0xba6b, 0x3029, 0x4400, 0x430e, 0x6e3c, 0x9ac4, 0x9490, 0xb775, 0x83ae, 0xed0d, 0x9077, 0x549f, 0x730a, 0x8735,
    0x9878, 0x1d99, 0x6e77, 0x8f6f, 0x5eb4, 0xc7cd, 0xaaf4, 0x3681, 0x697c, 0x1c91, 0x2300, 0x4122, 0xe74f, 0x1c98, 0x1fbe, 0x0bab,
    0x6b13, 0x6740, 0x8ec9, 0x2592, 0x1ea7, 0xa837, 0x8353, 0x02d0, 0x3c57, 0x7503, 0xa999, 0xbf70, 0x79fc, 0x224d, 0x1a2b, 0xf4df,
    0xf8dc, 0xf152, 0xa6df, 0x5814, 0xaabf, 0xddd8, 0x2ea2, 0xa578, 0x05c9, 0x5419, 0x482b, 0x54ca, 0xb8fd, 0x2a0a, 0xceae, 0x974e,
    0xb42d, 0x0936, 0xbd89, 0xc768, 0x3085, 0x0d26, 0x6295, 0x3d11, 0x4fc1, 0x188c, 0x0031, 0x8771, 0x4583, 0x5d2a, 0xbefd, 0x8e32,
    0xd095, 0xeb3e, 0xfe96, 0x73bd, 0x5c9e, 0x1285, 0x14ce, 0x3720, 0x6fa7, 0x41af, 0xa8b1, 0xb0dc, 0x92ad, 0x0cbe, 0xd15b, 0x7760,
    0x7e18, 0x8a4b, 0x5a77, 0x2699, 0x76c2, 0x8a9a, 0xc541, 0x154f, 0x9ded, 0xf6ca, 0x0a8c, 0x2b99, 0x0196, 0x7af4, 0x1d66, 0x9d9b,
    0xcc1f, 0xb73c, 0x63fd, 0x0a48, 0xcacb, 0x23ea, 0x29a8, 0x1fe3, 0x6886, 0x6d71, 0x55c8, 0x46fc, 0x0d70, 0x4f64, 0x6375, 0x8849,
    0xb457, 0x892a, 0x80f8, 0xe39b, 0xe6dc, 0xddb5, 0x8bf6, 0x7352, 0xef21, 0xf50d, 0xb0bd, 0x2a04, 0xae20, 0xf188, 0xe809, 0x498e,
    0x4556, 0x2f37, 0xd291, 0x28a5, 0x0ebc, 0xcda2, 0x27f7, 0xad3d, 0xfa8f, 0xbad8, 0x6727, 0xe9cf, 0x4085, 0x17b6, 0x4e64, 0xa767,
    0x715e, 0x7995, 0xa620, 0x2e6f, 0xa359, 0x6577, 0xfb59, 0x9f88, 0xcffc, 0x825e, 0x186a, 0xb850, 0x52d4, 0x2a44, 0x4fea, 0x8972,
    0xcfd9, 0x8e31, 0x6688, 0x16d7, 0xcc34, 0xb4e7, 0x9454, 0x3bb2, 0x32d7, 0x3920, 0x0cb3, 0x1cd7, 0xc7d4, 0x24e7, 0xa960, 0x9aea,
    0x71ae, 0x5243, 0x33d3, 0xc755, 0xc399, 0x65e1, 0xd57f, 0x7b72, 0x880f, 0xbe39, 0x028d, 0x0773, 0x6d18, 0x1598, 0x8bd1, 0x836b,
    0xc126, 0xb685, 0xa596, 0x74e4, 0x0776, 0xbd15, 0xd818, 0x1753, 0xc700, 0x9fe7, 0x63a0, 0xc992, 0xab9d, 0x9553, 0xf3c1, 0xf764,
    0x4997, 0x9757, 0x2775, 0xa770, 0x4505, 0x5773, 0x4af6, 0x1990, 0x9cdb, 0xbbb6, 0x475a, 0x0370, 0x3855, 0x1f8d, 0xa8a9, 0x276c,
    0xa66c, 0xaa74, 0xfbab, 0xcaf1, 0x7cca, 0xe2aa, 0x6bb9, 0xc3ba, 0xbfc6, 0xb372, 0xb02d, 0x073a, 0xab79, 0x0455, 0x46a1, 0x998b,
    0xa6f5, 0x9828, 0xdd44, 0x2dd6, 0x170b, 0x8082, 0x853a, 0xd76e, 0xcf8f, 0xd350, 0xb05d, 0xc500, 0xb22a, 0xb979, 0x187b, 0x867e,
    0x0fd0, 0x80e6, 0xe490, 0x8fb8, 0x3a9d, 0xecac, 0xce2b, 0xaf32, 0x3213, 0x3168, 0x63eb, 0xc551, 0xbf53, 0xe096, 0xb6c0, 0xe81c,
    0x9239, 0xd0d3, 0xb2e4, 0x528d, 0xa260, 0xd69b, 0x7a27, 0x5a65, 0x0560, 0x1a51, 0x3a4e, 0x81d5, 0xfe84, 0x82bc, 0x6aee, 0xa8a0,
    0x1288, 0x3cc8, 0x739f, 0xa7f2, 0xd282, 0x1271, 0xa6cd, 0xb341, 0xf3bb, 0xdb9b, 0x8ed6, 0x31b8, 0x4606, 0xbd77, 0xfe6d, 0x2d39,
    0x6e65, 0x306d, 0xd44c, 0x78d6, 0xa4a2, 0x91dd, 0x7da1, 0x4d9e, 0x2af7, 0xfb7c, 0x8fe3, 0x8eb7, 0x6689, 0xdd22, 0x136a, 0x339d,
    0xbcc0, 0x48fe, 0x29de, 0xce5f, 0xa584, 0xf572, 0x860b, 0x48dc, 0x9941, 0xf74b, 0x1936, 0x1a57, 0xe24e, 0x09a1, 0x2834, 0x2763,
    0xc078, 0x60df, 0xfb99, 0xf0ea, 0xf190, 0x42ef, 0x32b0, 0x97b1, 0x78ed, 0xdd32, 0x5374, 0xc080, 0x8130, 0x164f, 0xf1b1, 0xccf6,
    0x180f, 0xec1b, 0x9b41, 0xa60e, 0x2b0e, 0xea30, 0x4c49, 0x3ad4, 0xd27f, 0x4cc4, 0x2a11, 0x7a8b, 0x4bf1, 0x23c0, 0x8561, 0x66ff,
    0x5986, 0x6b8e, 0x3cfd, 0xe722, 0xf84f, 0x33c1, 0x4935, 0x0acb, 0x7ad3, 0x144c, 0xb1f0, 0x17a5, 0xc287, 0x1bb9, 0x6676, 0x69cb,
    0x45bf, 0x2b1d, 0x7ab4, 0xcfe5, 0x73e0, 0x57ca, 0xc917, 0x5e28, 0xcc1d, 0x340a, 0xa68e, 0x8e1d, 0xd3ec, 0x7b09, 0xf53b, 0x096e,
    0x5882, 0xb2e3, 0x673f, 0xc638, 0xa277, 0xa655, 0xc123, 0xaa3f, 0xd7a5, 0xb683, 0xd314, 0xd2cf, 0x72b1, 0xba4a, 0x383e, 0xdf6a,
    0x62f6, 0xf6fe, 0xa496, 0x7437, 0x76ab, 0xa0c1, 0x1242, 0x025a, 0xa8b7, 0xa112, 0xc133, 0x4ff8, 0xdf27, 0x1a39, 0x1d74, 0x686f,
    0xff66, 0x6185, 0xb8e6, 0x9865, 0x5e8c, 0x1b5c, 0x7a12, 0xca33, 0xcf79, 0x6afc, 0xf1bf, 0x20fe, 0xcb3d, 0x09dd, 0xc92d, 0x384c,
    0x4d66, 0x2010, 0x1ed8, 0xd5c0, 0xdaf7, 0x3e22, 0xfcff, 0xf990, 0xa18b, 0xc1e0, 0x32f5, 0xf159, 0x5838, 0x71f1, 0x755b, 0x14f5,
    0x317f, 0x07a6, 0x96e4, 0x261c, 0x909f, 0x311d, 0xa510, 0x771c, 0x6cec, 0xda06, 0x0ee8, 0xcf49, 0xa75c, 0xb01e, 0xcb2f, 0xae6a,
    0x1152, 0xc8a8, 0xcdad, 0x7b55, 0xd01d, 0x939e, 0x1c6a, 0x7461, 0xf421, 0xba59, 0x392d, 0x6dfe, 0xe4a7, 0x2fa9, 0x1240, 0x1f84,
    0xdd91, 0xa2a4, 0x18a5, 0x127d, 0x8db8, 0x2e3f, 0x8c29, 0xe572, 0xb989, 0xb542, 0x45ed, 0x2355, 0x831f, 0xe7e1, 0xa52d, 0xaf30,
    0x1dce, 0x8f9e, 0xda1e, 0x0bcd, 0xf237, 0x776b, 0x03d8, 0x9db8, 0xcd89, 0x100d, 0xb938, 0x9274, 0x538b, 0x6a88, 0x3b74, 0x0367,
    0xa7bb, 0x4d27, 0x3e8a, 0x5883, 0xbd28, 0x8f85, 0x9c84, 0x9593, 0xd976, 0x94f3, 0xf2fb, 0xed13, 0xdc35, 0xb699, 0x1b4e, 0xfc7b,
    0x6624, 0x4565, 0x79cf, 0xfc6a, 0xc326, 0xe34a, 0xdb21, 0x3e35, 0x0d2d, 0x7baa, 0x94d5, 0x080b, 0x0ca6, 0xcc96, 0x8721, 0x0022,
    0x60f6, 0xe8e1, 0x3644, 0x8288, 0x21a9, 0xd738, 0xc88e, 0x6070, 0x96a4, 0x3774, 0x9e7a, 0x9de1, 0x9d03, 0x16d8, 0xe06c, 0x876e,
    0x83f6, 0x04cd, 0xece4, 0xfd39, 0xea81, 0xb020, 0x79bd, 0xd23e, 0x48f3, 0xf51c, 0xd90e, 0xf1a9, 0x1be0, 0x3632, 0x041c, 0xe97f,
    0xda0c, 0x3075, 0xe5ee, 0xb3ce, 0x94dd, 0xd415, 0xcd3f, 0x2bcf, 0xe330, 0x29a2, 0x9eec, 0x3e78, 0xc5db, 0x1ad1, 0x7a04, 0x4751,
    0xd1df, 0xa143, 0xadcd, 0x557b, 0x440b, 0x86ed, 0xdbb9, 0x4696, 0x7b4f, 0x53ad, 0xadbb, 0x84a4, 0x8ddb, 0x59dd, 0x1664, 0xfb6d,
    0xc0ac, 0xc368, 0xa155, 0xf064, 0xe265, 0xb214, 0x064e, 0xe5dc, 0x89b9, 0x42b5, 0xdeb6, 0x4395, 0xecd2, 0x0817, 0xbd64, 0x88c9,
    0x3212, 0x100c, 0xcd9b, 0x4121, 0x1826, 0xfe15, 0x26ca, 0x0e2d, 0xabe9, 0x1893, 0x6442, 0x4fd5, 0x1e10, 0x3f72, 0xaab8, 0x329f,
    0xcf1e, 0x8643, 0x0bdf, 0xe683, 0x1ec6, 0x9fa1, 0x60d0, 0x55bb, 0xf5a8, 0x2677, 0x80af, 0x4333, 0x77d0, 0x3b28, 0x9857, 0x96d2,
    0xcc9a, 0x2040, 0x1b60, 0x1450, 0x0f76, 0xb8d4, 0xcda6, 0x41b3, 0xddfd, 0xd70d, 0xce58, 0x71cb, 0x2bf0, 0x6848, 0xa484, 0xbbad,
    0x17f7, 0xf124, 0x8f97, 0x672d, 0x68c3, 0xacc0, 0xca1e, 0x34e3, 0x7aa2, 0x659c, 0x2bfc, 0x4c30, 0x8966, 0x22dd, 0xcc93, 0x84b4,
    0x1bd0, 0xae67, 0xc338, 0x295c, 0x437d, 0xc87b, 0x2506, 0xfb87, 0xa8d9, 0x6f73, 0x8f34, 0x51cf, 0x29cc, 0xd61c, 0x57ef, 0x1ae6,
    0x5eee, 0x3ceb, 0x0034, 0xb19d, 0x900e, 0x220d, 0x5a68, 0xa4e2, 0xd24f, 0x0c57, 0x9b2f, 0x47d0, 0x5462, 0xe9b5, 0xff58, 0x9202,
    0xe47e, 0x203c, 0x3656, 0x1130, 0x583a, 0x01fb, 0x87c2, 0xb91b, 0xd08d, 0xdaa5, 0x6d57, 0xb2d2, 0x0220, 0x7218, 0xe1e8, 0xf660,
    0xa73d, 0x61a6, 0x3786, 0x8cae, 0x0b08, 0xd594, 0x738d, 0x1a92, 0xde03, 0x885d, 0x1743, 0xc183, 0x494c, 0xd43a, 0x481e, 0x9cd2,
    0x3fe9, 0x6226, 0x8385, 0x1f17, 0x1de5, 0x6d78, 0x3ab1, 0x9d94, 0x266a, 0x6b3c, 0xf56a, 0x1874, 0xc408, 0x4879, 0x26cb, 0xde25,
    0x19b6, 0x5c10, 0x2703, 0xee72, 0xaa40, 0xe8bc, 0xbbe8, 0x7be2, 0x510a, 0x71c7, 0x5306, 0x4b66, 0xf7a1, 0x042d, 0xb2d5, 0x0f6b,
    0x1d4d, 0x3b1c, 0xe35a, 0x2af0, 0xff84, 0x133c, 0x1f2d, 0x30c9, 0x761f, 0x0aba, 0xe5bb, 0x02dc, 0xe1ef, 0x2162, 0xd7c8, 0xb67c,
    0xd7f5, 0x8803, 0x4603, 0xd559, 0xfad4, 0x116c, 0x6086, 0x47c9, 0x928b, 0xe1b1, 0xcc35, 0xdeaf, 0xbffc, 0x9b16, 0x1856, 0xf66f,
    0xb6b0, 0xab63, 0xaf0e, 0x9fb9, 0x584d, 0xb5b8, 0x93d0, 0x9e51, 0xbc3e, 0xe228, 0x6328, 0x9f5c, 0xc9ed, 0xff55, 0x258c, 0x8ba6,
    0xa906, 0x1603, 0x8f08, 0xf618, 0x9f60, 0xd030, 0x531f, 0x9c93, 0xbf74, 0x1994, 0x2104, 0x674b, 0x31bc, 0x7465, 0x6731, 0x88cd,
    0x0ff7, 0x0c4a, 0xe09e, 0xfef4, 0x12ca, 0xc522, 0x7cdd, 0x9c8c, 0x0fd2, 0xbfb2, 0xc485, 0xe977, 0xcb5a, 0xf8e4, 0x43c7, 0x1c29,
    0x55f5, 0x0b36, 0x99e4, 0xa2fb, 0xf0fe, 0x2064, 0x61d8, 0x38bc, 0x2869, 0xcdf5, 0x68f5, 0xcb9f, 0x9c9b, 0xe140, 0x5361, 0xc11d,
    0xb592, 0xf08c, 0xda58, 0x9a26, 0x5fc1, 0xe05b, 0xc836, 0xd02c, 0xa2ca, 0x39b5, 0xdcb7, 0xb52d, 0x9e91, 0x365d, 0x9966, 0x74db,
    0xe7f5, 0x5a25, 0x7073, 0x09c4, 0x8e74, 0xc2b6, 0x5b36, 0xa248, 0xa04b, 0x3adf, 0x0311, 0xf9f7, 0xd6a7, 0x8b60, 0xaa31, 0xb9ae,
    0x2f80, 0x0297, 0x1057, 0xc478, 0x23f1, 0x65ff, 0x9ee0, 0xf4fe, 0x24af, 0x2b91, 0x5117, 0xbc52, 0x0d52, 0x062c, 0x8152, 0xf954,
    0xe8f8, 0x9b02, 0x47b1, 0x2995, 0x425b, 0xeaad, 0x4982, 0xf9c4, 0x0df9, 0xbfcc, 0x4008, 0x3f9b, 0x6928, 0xf5cd, 0x4a52, 0x3f6c,
    0xf107, 0xff8d, 0xbecc, 0x5fca, 0xadf3, 0x04ba, 0x0a20, 0xe73b, 0x3e4c, 0xd0d5, 0xe5ae, 0xeb0e, 0xc6fd, 0x3fdf, 0x3f2b, 0x6ccb,
    0xe6e5, 0xaac8, 0x450e, 0x0ec5, 0xbec3, 0xce54, 0x349b, 0x7736, 0x0b11, 0x0f7f, 0x94e6, 0xf240, 0x5e95, 0xd026, 0xa269, 0xa58d,
    0xfaa9, 0x884c, 0xc147, 0x034f, 0xd546, 0x29e1, 0x8b92, 0xb1e1, 0xbfeb, 0x37ba, 0x0b43, 0xe7d1, 0x716a, 0x510d, 0x5e58, 0x82cb,
    0x243b, 0xbc3d, 0x8f3a, 0x8c5f, 0x0cbd, 0x9473, 0xe97e, 0x2833, 0x546d, 0x9e12, 0xab6e, 0x9ea2, 0x5ae3, 0xf02a, 0x7c14, 0xf034,
    0x70cd, 0x8b6a, 0xc8d1, 0x3ef9, 0xb73a, 0x27d6, 0x3959, 0x49c8, 0xaee9, 0xa4c0, 0x63aa, 0x9f19, 0xad00, 0xdf1d, 0x1364, 0x0e2e,
    0xc6bd, 0xbcb8, 0xed1f, 0x6b16, 0xe27c, 0xc124, 0xd07d, 0xdd25, 0x2ed5, 0x6e84, 0xb2a1, 0xc57e, 0x86a8, 0xb538, 0xba3c, 0x9c8f,
    0x81b7, 0x8337, 0xd206, 0x5134, 0x6bd3, 0xc4a8, 0x4026, 0x9887, 0x88e0, 0x57a9, 0x73a1, 0xcfbc, 0x0a38, 0xce21, 0x54f9, 0x5281,
    0xcefa, 0x4274, 0x2c95, 0x802c, 0xadea, 0x5b42, 0x56f9, 0x6cfc, 0xed41, 0x4777, 0xc682, 0xb4e8, 0xb356, 0xf0e0, 0x4baf, 0x076d,
    0x01f9, 0x17ab, 0xe9f6, 0xbca4, 0x9173, 0x7e9e, 0xbe9a, 0x8931, 0xd67f, 0x243c, 0xb4bd, 0x3429, 0xcded, 0xddf9, 0xcd09, 0xd35f,
    0x53c4, 0xea7f, 0x8462, 0x3d85, 0x3667, 0x3911, 0xeeac, 0xedc6, 0x2054, 0x4709, 0x6a22, 0xf788, 0xbdf0, 0x683e, 0x3830, 0x4764,
    0x660f, 0x1e8e, 0x0258, 0xe290, 0x04b1, 0xc765, 0xf3f5, 0xeb46, 0x4bf9, 0x97d9, 0x49d5, 0x6955, 0xade4, 0xe5e4, 0x7394, 0xbd0c,
    0xd906, 0x9a05, 0xb2b6, 0xce29, 0xcb82, 0x585e, 0x608e, 0x8d21, 0x84f3, 0xcc77, 0x594d, 0xb080, 0xcf05, 0x9dae, 0x1a44, 0x1d20,
    0x7c3c, 0xd709, 0x748c, 0x5f15, 0xb317, 0xf7b7, 0x95b5, 0x714e, 0x0954, 0x3469, 0x23a8, 0x78d8, 0xbfb0, 0x0c23, 0xd3ae, 0xb5d5,
    0x8176, 0x93b4, 0xebc6, 0x26db, 0x0a17, 0x0d43, 0x3c67, 0x59b2, 0x3f8f, 0x49a4, 0xee56, 0x7719, 0x0433, 0x3e4a, 0xd2c1, 0xd80f,
    0xb037, 0x3ed0, 0x05cf, 0xae9d, 0xc870, 0xe3d9, 0x13a7, 0xabb2, 0x9093, 0xb272, 0x0388, 0xf5d7, 0xb676, 0x6a72, 0xcfba, 0x2574,
    0xdc02, 0xbbe5, 0x1d5e, 0x733f, 0xa302, 0xe64a, 0x8915, 0x5dd4, 0xf5f3, 0x46eb, 0x713a, 0x2abb, 0x037b, 0xed03, 0x13f2, 0x23a6,
    0x88aa, 0x6c6b, 0x4aab, 0x4eaa, 0xe732, 0xd9f9, 0x9771, 0x6ee5, 0x7965, 0xf7e1, 0xac1c, 0xc9ce, 0x94b4, 0x7e0e, 0xe344, 0x174a,
    0x37e8, 0xd6f3, 0xe559, 0x531b, 0xdb66, 0x77dc, 0x5055, 0xaa05, 0xb3e5, 0xbe46, 0x0faa, 0x38f9, 0x9d70, 0xc7c3, 0xd797, 0xa40e,
    0x8f07, 0x3d84, 0x2640, 0x8798, 0xe347, 0x154e, 0xf18f, 0xd414, 0x50c6, 0xb93e, 0x77e9, 0x85c4, 0x1ec9, 0xb053, 0x952e, 0xc1a2,
    0x360b, 0xf555, 0x5c1c, 0xc826, 0x551f, 0xb067, 0xf1fb, 0xba7a, 0x56b3, 0xe0f0, 0xf9ec, 0x64bc, 0x1420, 0x9ae0, 0x0636, 0xd4c5,
    0xcefd, 0x211c, 0xf8ee, 0x6805, 0xeb05, 0xebd9, 0xbc7d, 0xeed0, 0xadbe, 0x003b, 0x3bfc, 0xb413, 0x1827, 0xf7f1, 0x368d, 0xc989,
    0x354c, 0xdb82, 0x54dc, 0x1716, 0x7086, 0x3a63, 0xa656, 0x7184, 0x1147, 0xe1f5, 0x5a10, 0x2e1c, 0x48b4, 0xeb02, 0x33fc, 0x41ea,
    0x8aa1, 0x726f, 0x62a7, 0xb171, 0xd0a4, 0xd2f6, 0x9a5a, 0x7509, 0x122c, 0x5ba5, 0xc71f, 0x6f1d, 0x7b86, 0x769f, 0x118a, 0xf614,
    0x9311, 0xc97a, 0x5d3c, 0x30b9, 0x90f0, 0x59ff, 0xe3c0, 0x7755, 0x9455, 0x39d8, 0x4e38, 0x2e80, 0x275b, 0xcccd, 0x4f11, 0xa9ff,
    0x0867, 0xa633, 0xe761, 0x857a, 0xa42a, 0x5aaf, 0x13e7, 0x0926, 0x3d0e, 0x4180, 0x8c60, 0x3453, 0xbe48, 0x42f1, 0x1cb2, 0xef7c,
    0x2641, 0x5717, 0x3693, 0x00f4, 0xe5a5, 0xdcfa, 0xc619, 0xe14a, 0x3c46, 0x0e3a, 0x68d3, 0x989c, 0x4835, 0xb018, 0xa680, 0x6397,
    0xd5ab, 0x61d0, 0xa9ab, 0x0bf2, 0xfff3, 0x43e6, 0x0169, 0x7526, 0xc2be, 0xdb77, 0xb9cb, 0x9c0c, 0x9de7, 0xd3b6, 0x0e8b, 0xf34d,
    0x99a8, 0xacf1, 0x6752, 0x9016, 0x6514, 0x082f, 0x14fd, 0x5db1, 0x8949, 0xfbb3, 0x7041, 0x66d8, 0xb77d, 0x2bec, 0x7ac0, 0x729d,
    0x8bef, 0xf6d1, 0xef33, 0xe85c, 0x31df, 0x13ce, 0x63d7, 0x3738, 0x04a2, 0x0f32, 0x5b99, 0x4c1b, 0x1989, 0x5159, 0x983d, 0x7a38,
    0x0c6e, 0xa3b5, 0xe3ad, 0xe3f8, 0xc202, 0x6535, 0x6778, 0xa79e, 0xbeb3, 0x9d10, 0xc3fc, 0xea4a, 0x2700, 0x2500, 0x0960, 0x8a43,
    0xf4b3, 0x34c5, 0x6387, 0xa9a3, 0xd0cc, 0xe02b, 0x53f5, 0x9910, 0xff5f, 0xfc8b, 0xa602, 0xc225, 0x004b, 0x1c52, 0xdc13, 0x9fde,
    0x377f, 0x6844, 0x23fc, 0x5c8b, 0xf310, 0xc804, 0x2619, 0xa3e5, 0x9620, 0xecb8, 0xd16f, 0x4ac7, 0xb3c7, 0xe190, 0x8c84, 0x0403,
    0x4a2e, 0x86c7, 0x76d4, 0xe370, 0x193c, 0x5568, 0x5612, 0xc1b8, 0x7517, 0x4562, 0xec70, 0x7534, 0x4a19, 0xed7a, 0x991e, 0x0845,
    0x30d7, 0x7abf, 0x9dad, 0x9c9a, 0x4394, 0xb1ef, 0xf50c, 0xcf5f, 0x9d46, 0xd422, 0xabc0, 0x8d6b, 0x9895, 0x5728, 0xd3de, 0xeb54,
    0x535a, 0xefc4, 0xfea8, 0x8f04, 0x5bfd, 0x337c, 0xe4d4, 0xed6c, 0x1afd, 0xc3c8, 0x3bc0, 0xe881, 0xa586, 0x7967, 0xf7fd, 0x1ff1,
    0xdc85, 0xb929, 0x41c1, 0xd5c3, 0x3e43, 0xf25a, 0x230a, 0x46a4, 0xb34f, 0x25ec, 0x30de, 0x3ae2, 0xd77f, 0x746f, 0x0268, 0xc6f7,
    0x6431, 0xcb40, 0x7170, 0x9b20, 0x5f5a, 0x7998, 0x2527, 0x6b3a, 0x55d2, 0x8b95, 0x22bb, 0x5091, 0xb111, 0xfe16, 0x64be, 0x0acd,
    0xc842, 0x8440, 0xb862, 0x7e92, 0x3f22, 0xce88, 0x24ad, 0xa278, 0xfae4, 0x1943, 0xd7e0, 0xcc6f, 0xca76, 0xa6ef, 0x57bc, 0xf3b8,
    0x8504, 0x6f36, 0x2809, 0x94c9, 0x4d7f, 0x3427, 0x9380, 0x192e, 0x2cd2, 0xbba9, 0x9a67, 0x8120, 0x33bb, 0x5bb8, 0xbab3, 0xb71b,
    0x9fc0, 0xeac7, 0x17c8, 0x0b9f, 0x77e7, 0x37b7, 0x994c, 0x9280, 0xbb85, 0x3bb3, 0xa3d6, 0xdc99, 0xbbbc, 0x9bb7, 0xd99c, 0xe444,
    0x8251, 0x7c95, 0x6d2a, 0x5157, 0x6cc2, 0x56cf, 0x83ee, 0xe92e, 0x759c, 0x9924, 0xc57b, 0x8f3b, 0x6459, 0x3355, 0x1d1a, 0xf75b,
    0xa5f5, 0x8799, 0x7b84, 0x9d21, 0xcd4e, 0x43d2, 0x216c, 0x8cb9, 0xb4a3, 0xa7ff, 0x542c, 0x12a9, 0x7844, 0xb0c7, 0xc909, 0xc56b,
    0x9b2c, 0x7897, 0x0cc5, 0x8044, 0x3621, 0x6c5b, 0x61ff, 0xc1aa, 0x76dc, 0xdbae, 0xef89, 0xefa2, 0xb9e1, 0xa2b9, 0x1025, 0x9079,
    0x1023, 0x21e5, 0x8e43, 0x28ad, 0xdb0d, 0x1688, 0x00c6, 0xc189, 0x7bbd, 0xacc8, 0xa2f3, 0xa902, 0x1d7c, 0x5b81, 0x4cb1, 0x30d8,
    0x685f, 0x6793, 0xc712, 0x9d61, 0x76ba, 0x3c17, 0x0c0d, 0xa445, 0x4c81, 0x4c66, 0x0a62, 0xf2e6, 0xcea3, 0x17e3, 0x12c4, 0x1d97,
    0xffa8, 0x8bad, 0x74f6, 0x24ca, 0x7480, 0x6910, 0xee8d, 0xfaef, 0xe10b, 0xd7b2, 0x5def, 0x8191, 0xc780, 0xea11, 0xcfd7, 0xad1b,
    0x60fa, 0x4950, 0xa8bb, 0x2b12, 0x720c, 0x3948, 0xd000, 0x76c6, 0x53c8, 0x0437, 0x3e50, 0x1de9, 0xd5af, 0x004f, 0x4c4b, 0x77eb,
    0xdf52, 0x327c, 0x5785, 0x8a87, 0xc6f4, 0x2baa, 0x3044, 0x15ff, 0x751e, 0xbf18, 0x156a, 0xb472, 0xcdbd, 0x66a3, 0xc9ad, 0xab94,
    0xfff2, 0x6c5a, 0x7cdc, 0xeb45, 0x180e, 0xa142, 0xf1d0, 0x0a47, 0x3a8c, 0x8ac3, 0x4cf0, 0xfe13, 0x61bb, 0xd102, 0x2c85, 0x7899,
    0x6158, 0xd9bf, 0x999d, 0xda72, 0x0599, 0x7edb, 0x2f59, 0x6232, 0x4dff, 0xa2b1, 0xc324, 0x7cb4, 0x1908, 0x3fbc, 0x45b1, 0xa694,
    0xf2cb, 0xab9a, 0xdd56, 0x453d, 0x3fd6, 0xa480, 0xd5fb, 0x86b9, 0x709e, 0xf98e, 0x250d, 0xb9be, 0x165e, 0x9c39, 0xbae8, 0x954a,
    0x1e1c, 0xd66a, 0xd362, 0x97ff, 0xbf08, 0xb7c3, 0xa9ae, 0x0a96, 0x4c47, 0xe427, 0x8f88, 0xf6bd, 0x4883, 0xa403, 0xf21e, 0x50df,
    0x9fdf, 0x70df, 0x121f, 0x1f12, 0x6883, 0x65a2, 0x7817, 0xc403, 0x6c47, 0xd489, 0xd6c3, 0x0428, 0xd215, 0x16be, 0xaf88, 0x26fe,
    0x3e1c, 0x9f2b, 0xbf63, 0xf66a, 0xad88, 0xb7ff, 0xf362, 0xd7f0, 0x962a, 0x2a96, 0xc9ae, 0x3b17, 0xdf08, 0x2d58, 0xcccb, 0xd7c3,
    0x12cc, 0xd08f, 0x4b0f, 0xcb9a, 0x30ae, 0x653d, 0xfd56, 0xf0f9, 0x5ffd, 0xa6b9, 0xf5fb, 0xc51d, 0x5fd6, 0x45af, 0x0434, 0xc480,
    0xbc06, 0xb54a, 0xdae8, 0x9e4c, 0x365e, 0xa39d, 0x7945, 0xbc39, 0x909e, 0x220c, 0x91e8, 0x198f, 0x30d6, 0xd9be, 0x450d, 0x531a,
    0x1ff3, 0x0a4a, 0x7dee, 0x8c5a, 0x5f8e, 0x0b46, 0x9cdc, 0x5ade, 0x72d3, 0x2a47, 0x11d1, 0x5108, 0x380e, 0xff69, 0xb856, 0xc142,
    0x3550, 0x9899, 0x4c85, 0x6cc6, 0x81bb, 0x1ecd, 0x0dfd, 0xf102, 0x5a8c, 0xee7d, 0xbfca, 0xaac3, 0x83fa, 0x1e14, 0x6cf0, 0xa264,
    0x4351, 0xc694, 0x65b1, 0xb528, 0x3908, 0x3b70, 0x473c, 0x5fbc, 0x6dff, 0x6a20, 0x1321, 0xc2b1, 0x287a, 0x9cb4, 0xe324, 0x030c,
    0x8158, 0x4286, 0x1744, 0xf9bf, 0xcbdc, 0xfa72, 0xb99d, 0x0df4, 0x64ba, 0x8232, 0x4f59, 0x2b8c, 0x2599, 0x9670, 0xf17c, 0x9edb,
    0x885f, 0x2066, 0x6c36, 0x8793, 0x7583, 0xbd61, 0xe712, 0x1ec4, 0x2e55, 0xc445, 0x2c0d, 0x9adb, 0x96ba, 0xb32c, 0x919f, 0x5c17,
    0x98b2, 0x3d97, 0x32c4, 0xa409, 0xeea3, 0x75ed, 0xd736, 0x37e3, 0x6c81, 0x949b, 0xaaa2, 0x6c66, 0xc41e, 0x12e7, 0x2a62, 0xe33f,
    0xdcd3, 0xcd1b, 0xefd7, 0x7714, 0xe780, 0xa50e, 0x677f, 0x0a12, 0x010c, 0x0363, 0x6ec5, 0xf7b2, 0x2c3e, 0xa191, 0x7def, 0x23a3,
    0x1fa9, 0x7eb0, 0xbebd, 0xabad, 0x0ac9, 0x44ca, 0x94f6, 0x908e, 0x2ad5, 0x1af0, 0x0e8e, 0x46e6, 0x9480, 0xd6cb, 0xbca7, 0x8910,
    0xb843, 0xcb94, 0xe9ad, 0x6b11, 0xedbd, 0xf017, 0xa386, 0x86a3, 0x951e, 0x7ecf, 0x782f, 0xdf18, 0x6f7f, 0xd472, 0x356a, 0xc8cc,
    0xff52, 0x1d32, 0x5241, 0x527c, 0x2330, 0xaa87, 0x7785, 0x81b2, 0xa414, 0x35ff, 0x5044, 0x426f, 0xe6f4, 0xf4e6, 0x4a8b, 0x4baa,
    0x80fa, 0x026a, 0x9aa6, 0x6950, 0x328c, 0x4b12, 0xc8bb, 0x04ac, 0x8b17, 0x96c6, 0xf000, 0x5859, 0x920c, 0x519a, 0x058e, 0x5948,
    0x3027, 0x97eb, 0x6c4b, 0xedc1, 0xf5af, 0xf0a8, 0x3b01, 0x204f, 0x73c8, 0x0281, 0xd3e9, 0x2437, 0xd6b4, 0x3de9, 0x5e50, 0xbe95,
    0x8431, 0xdc14, 0xed7c, 0xeb40, 0xa166, 0xbb20, 0x9170, 0x61b6, 0x6145, 0x8b3a, 0x4527, 0x3fb7, 0x7f5a, 0x2b68, 0x5035, 0x9998,
    0x502b, 0x2acd, 0x84be, 0x50da, 0xd111, 0x0851, 0x1478, 0x1e17, 0x75d2, 0x1b07, 0xe603, 0xab95, 0xb661, 0x7091, 0x42bb, 0xbae3,
    0xbe4e, 0x13b9, 0x77bc, 0xb46d, 0xea76, 0xbed4, 0x664f, 0xc6ef, 0x1ae5, 0x755a, 0x9552, 0x3943, 0xfe12, 0xec6f, 0xf7e0, 0x3e4b,
    0xe842, 0x6a84, 0xfea2, 0xa440, 0x65e9, 0x9e92, 0xd862, 0x4c7c, 0x70e5, 0xc278, 0x44ad, 0xd7ad, 0x5f22, 0x0b6f, 0x4129, 0xee88,
    0x26f4, 0x0445, 0xf99c, 0x0b9a, 0xdbbc, 0xef3a, 0xb7bb, 0xbbb7, 0xdb85, 0xa1e9, 0xec5f, 0x5bb3, 0xb359, 0xfc99, 0xc3d6, 0x2804,
    0xbfc0, 0x59c4, 0x2147, 0x0ac8, 0x1c3e, 0x2b9f, 0x37c8, 0x642c, 0xe6a7, 0xb280, 0xb94c, 0x843b, 0x97e7, 0xe797, 0xe914, 0x57b7,
    0xa504, 0x23ba, 0x93d2, 0x8f36, 0x9c56, 0xb4c9, 0x4809, 0x6cbd, 0xf473, 0x392e, 0xb380, 0x43cd, 0x6d7f, 0x06cc, 0x31f4, 0x5427,
    0x301d, 0xd71b, 0xdab3, 0xc184, 0x53bb, 0xe1d4, 0x8833, 0x7bb8, 0x4cd2, 0x497f, 0x52fb, 0xdba9, 0x77f6, 0xa120, 0xba67, 0x61fa,
    0x02c1, 0x50d8, 0x6cb1, 0xb16c, 0x3d7c, 0xbccc, 0x11e2, 0x7b81, 0x9bbd, 0xeb92, 0x6a35, 0xccc8, 0x89a5, 0xc902, 0xc2f3, 0x5d37,
    0x3023, 0x87aa, 0xbe26, 0x41e5, 0xafad, 0x48ad, 0xae43, 0x3547, 0x89e1, 0xe189, 0x20c6, 0x2117, 0xfb0d, 0xab21, 0x265a, 0x3688,
    0xbb2c, 0x0648, 0x7e1a, 0x9897, 0xe84c, 0xa044, 0x2cc5, 0xe5a0, 0x543f, 0xe1aa, 0x81ff, 0x5aaa, 0x5621, 0x2e6c, 0xa211, 0x8c5b,
    0x9ad5, 0xb079, 0x3025, 0x7521, 0xd9e1, 0x2148, 0x3219, 0xc2b9, 0x96dc, 0x68e6, 0x634f, 0xfbae, 0xea8c, 0x0fa3, 0x0f8a, 0x14f8,
    0xa251, 0xe744, 0x47d2, 0x9c95, 0xaa0e, 0x7157, 0x8d2a, 0x9890, 0x718d, 0x092f, 0xa3ee, 0xed75, 0x8cc2, 0x6b43, 0x0a9f, 0x76cf,
    0x9f91, 0x175c, 0x3d1a, 0x1fec, 0x8459, 0x2a79, 0x0087, 0x5355, 0x959c, 0xd247, 0x34ec, 0xb924, 0x97ba, 0xaf3b, 0xe57b, 0x0263,
    0xb10d, 0xe56b, 0xe909, 0xc220, 0x9844, 0xe7c9, 0x9d50, 0xd0c7, 0xd4a3, 0x7604, 0x1a1b, 0xc7ff, 0x9eff, 0x32a9, 0x742c, 0xd16a,
    0xc5f5, 0xbe58, 0xe421, 0xa799, 0x9efc, 0xbd21, 0x9b84, 0xbeae, 0xf4b0, 0xacb9, 0x416c, 0x0f2d, 0xed4e, 0x5387, 0xe2cb, 0x63d2,
    0xeefd, 0x1009, 0x1c53, 0x411c, 0x22df, 0x8805, 0x18ef, 0x1e0b, 0x452a, 0x0ed1, 0xdc7d, 0x3b23, 0x0b06, 0xb117, 0xde60, 0x0bda,
    0x2199, 0xe989, 0x568d, 0x84af, 0x3827, 0x044b, 0x4bc9, 0x17f2, 0xcdbe, 0xcaf0, 0x1151, 0x203b, 0x8b91, 0xd413, 0x5bfc, 0xa47f,
    0x662c, 0x61ea, 0x53fc, 0xc17e, 0x68b4, 0x8ebf, 0xf331, 0x0b03, 0x3147, 0x6554, 0x835b, 0x01f6, 0xd2c2, 0x4e1c, 0x7a10, 0x6d52,
    0x554c, 0xe152, 0xf535, 0xfb82, 0x6461, 0x3716, 0x74dc, 0xa8d4, 0x854a, 0x9184, 0xc656, 0x0c52, 0x9086, 0xfab9, 0x5955, 0x5a63,
    0xfd66, 0xc9ff, 0x6f11, 0xf05f, 0x475b, 0xcf3c, 0x54ff, 0xeccd, 0xb455, 0xfee0, 0xe03c, 0x59d8, 0xbd4d, 0x4e80, 0x6e38, 0xadc8,
    0xb311, 0x9e63, 0x26bf, 0xe97a, 0x47ae, 0x50b9, 0x7d3c, 0x83f1, 0xc5ff, 0x9755, 0x03c1, 0x3070, 0xb0f0, 0x0f9b, 0x2b81, 0x79ff,
    0xaaa1, 0x2116, 0xec0f, 0x926f, 0x6297, 0xd171, 0x82a7, 0xf232, 0xf8c8, 0x9509, 0xba5a, 0x8f80, 0xf0a4, 0x90b5, 0xf874, 0xf2f6,
    0xde04, 0x1615, 0x318a, 0x606b, 0x9b86, 0x7057, 0x7376, 0x969f, 0x322c, 0x2178, 0x2479, 0x7ba5, 0x2534, 0x8f1d, 0xe71f, 0xdb1c,
    0x9f85, 0x929d, 0x9ac0, 0xa609, 0xd77d, 0xa7b1, 0x87e8, 0x4bec, 0xa949, 0x089e, 0x8995, 0x1bb4, 0xb5f2, 0x86d8, 0x9041, 0x3cf8,
    0xb9a8, 0xd56b, 0x6714, 0xccf1, 0xfb02, 0xb016, 0x8752, 0xc073, 0xec10, 0x7db1, 0x34fd, 0x48f9, 0x8514, 0xad9f, 0x4adf, 0x282f,
    0xf5ab, 0xd7da, 0xae0f, 0x81d0, 0x1d4f, 0x2bf2, 0xc9ab, 0xa25b, 0x4aae, 0x9526, 0x2169, 0xeca7, 0x1ff4, 0xc5b4, 0x0616, 0x63e6,
    0x945f, 0x134e, 0x2e8b, 0xb33c, 0xbde7, 0xf656, 0x59c5, 0xf3b6, 0xe2be, 0xa982, 0x7a6f, 0xfb77, 0x66b0, 0xbc0c, 0xd9cb, 0x7d9c,
    0x2867, 0xaa52, 0x491d, 0xc633, 0xc227, 0xa57a, 0x0762, 0x72ac, 0xd53e, 0x2926, 0x33e7, 0x7b04, 0xc42a, 0xcd85, 0x9f6c, 0x7aaf,
    0x55ce, 0x0f7d, 0x3cb2, 0x686a, 0xde48, 0xd0c9, 0xd8d2, 0x62f1, 0x5d0e, 0xd4a0, 0x649c, 0x6180, 0x8477, 0x5453, 0xac60, 0xc928,
    0xd130, 0x8397, 0xc680, 0x6df9, 0x6835, 0x1236, 0xbf2d, 0xd018, 0x5c46, 0x0c63, 0x52ec, 0x2e3a, 0x1fcd, 0xb89c, 0x88d3, 0x45e8,
    0x4641, 0x6b4e, 0x9f9b, 0x7717, 0xa4da, 0x20f4, 0x5693, 0x6ce7, 0x581b, 0x014b, 0xe619, 0xc1db, 0x05a6, 0xa008, 0x81c8, 0xfcfa,
    0x26b4, 0xe6f7, 0x2268, 0x004c, 0xf77f, 0xbfe1, 0x2f52, 0x946f, 0xd34f, 0x948f, 0xc182, 0x45ec, 0x9adf, 0x5ae2, 0x50de, 0x0267,
    0xfc85, 0xf252, 0x59f8, 0xd929, 0x84cf, 0xf5c3, 0x61c1, 0x5a83, 0x81f0, 0x66a4, 0x430a, 0x3d18, 0x5e43, 0x6311, 0xc1fb, 0x125b,
    0x735a, 0x0a32, 0x9afb, 0x0fc5, 0x529c, 0xaf04, 0x1ea9, 0xbeb5, 0xb548, 0x0d6d, 0x04d5, 0xc162, 0x7bfd, 0xd810, 0x19af, 0x537c,
    0xeb60, 0x3ff1, 0x17fe, 0x3e6b, 0xc586, 0x7bd8, 0x845b, 0x9967, 0x3afd, 0x98b0, 0xc81f, 0xe3c8, 0x7541, 0x0882, 0x5bc0, 0x36a8,
    0x6a2e, 0x5af5, 0xbe32, 0xa6c7, 0x6da8, 0x0371, 0x96d4, 0xee74, 0x22b7, 0xe1b8, 0x7612, 0x183b, 0x393c, 0x567d, 0x3c50, 0x7568,
    0xb12a, 0x2845, 0xb91e, 0xe542, 0x6a19, 0xb934, 0x0249, 0x0d7b, 0x9517, 0xbb36, 0xed06, 0x6562, 0x7c30, 0x9534, 0x0c71, 0x0247,
    0x8c8b, 0x0b55, 0xf3de, 0x2b7b, 0xb895, 0xd073, 0xcb28, 0x7728, 0xbd46, 0x6a0b, 0x69c4, 0xf422, 0xf654, 0xad6b, 0xcbc0, 0x066b,
    0x50d7, 0x885e, 0x16d1, 0x9abf, 0xba25, 0xbc9a, 0xbdad, 0x948b, 0x4a6f, 0xef5f, 0x150d, 0x47f6, 0x6394, 0x3825, 0x77c9, 0xd1ef,
    0xabef, 0xa2dc, 0x2ab8, 0x16d2, 0x508d, 0x085d, 0x0f34, 0xc7cf, 0x4326, 0x5738, 0x83d7, 0x1593, 0x51df, 0x4368, 0x6ce4, 0x33ce,
    0x4b3d, 0x9a38, 0xb83d, 0x896d, 0x3989, 0x3a59, 0x8ee7, 0x7159, 0x24a2, 0x9270, 0xfa26, 0x2f32, 0xd985, 0x6c1b, 0x7b99, 0x4e5f,
    0xc084, 0xaa43, 0x2960, 0x036b, 0x4700, 0x3bb6, 0x302d, 0x4500, 0xdeb3, 0x2837, 0xaea1, 0xbd10, 0x5095, 0x0a4b, 0xe3fc, 0x639b,
    0x2c6e, 0xc2c8, 0x85bc, 0xc3b5, 0x791c, 0x03f9, 0x03ae, 0xbfc1, 0x405c, 0xc79e, 0x8778, 0xd34b, 0xe202, 0xf63c, 0xe196, 0x8535,
    0x965d, 0x2403, 0xac84, 0x2694, 0xd3c7, 0x3f18, 0x8a61, 0x0191, 0xb620, 0x9687, 0x03ee, 0x0cb9, 0x0504, 0x6ac7, 0xf16f, 0xfe91,
    0x577f, 0xf966, 0x53de, 0x8844, 0x1620, 0x7c8b, 0x43fc, 0xcc1a, 0xe513, 0xc3e5, 0x4619, 0x8925, 0x1311, 0xf26e, 0xd4db, 0xe804,
    0x14b4, 0x47c3, 0x152e, 0x54c5, 0x8953, 0xc9a3, 0x8387, 0xaaba, 0x1173, 0xb910, 0x73f5, 0x0d21, 0xf0cc, 0x3cb8, 0x5206, 0x002c,
    0xde94, 0xbfde, 0xfc13, 0x02cb, 0x204b, 0xb9b4, 0xc007, 0x3c52, 0x1f60, 0x35b8, 0xe1d7, 0x1c8c, 0x99b5, 0xe225, 0xc602, 0xaaef,
    0x5fe9, 0x0005, 0xc004, 0x8226, 0xc226, 0x3f17, 0xa385, 0x988f, 0x3c04, 0xbd94, 0x5ab1, 0x9fe9, 0x3de5, 0x8448, 0x4005, 0x8d78,
    0xd88f, 0xfe25, 0x46cb, 0xb0e4, 0xe408, 0xe385, 0x620b, 0x6879, 0x466a, 0x081f, 0x7f17, 0x8b3c, 0x4c51, 0x3874, 0x156b, 0x0227,
    0xa5a7, 0x2f6b, 0xd2d5, 0x7c04, 0x17a2, 0x35d4, 0xfd94, 0x242d, 0x710a, 0x9ab1, 0x3f90, 0x91c7, 0xdfe9, 0x6b66, 0x7306, 0x7634,
    0x39b6, 0x3fce, 0xc448, 0x7c10, 0x60ba, 0x0e73, 0x4703, 0x7de5, 0xcd78, 0x9be2, 0xdbe8, 0x4139, 0xca40, 0x8005, 0x711a, 0x08bd,
    0xa879, 0x1670, 0x3856, 0x2264, 0xdffc, 0xa20b, 0x56c3, 0xbb16, 0xb28b, 0x70a8, 0x2386, 0x01b2, 0x5cd3, 0xfeaf, 0xec35, 0x2409,
    0xf7f5, 0x86cb, 0x6914, 0xa803, 0xf0e4, 0xf559, 0x6603, 0xbfb6, 0x1efc, 0x67c9, 0x8086, 0x1890, 0x1ad5, 0x8647, 0x3e26, 0x316c,
    0x3d4d, 0x8f9a, 0x7874, 0x5b1c, 0xc529, 0x4af0, 0x035b, 0x8c51, 0x4227, 0x50c9, 0x3f2d, 0xece6, 0x1f85, 0x556b, 0x2e0f, 0x333c,
    0xfc2f, 0xd67c, 0xf7c8, 0x866a, 0x01f0, 0x148f, 0x481f, 0x4162, 0x961f, 0xbf17, 0x4007, 0x2aba, 0xcb3c, 0x22dc, 0x05bc, 0x836a,
    0xd514, 0xe11d, 0x7361, 0xb10a, 0xbc9b, 0x44c4, 0xdab1, 0x0141, 0x4869, 0x7f90, 0x6d5d, 0xedf5, 0xd1c7, 0xeb9f, 0x88f5, 0x0048,
    0x75f5, 0x24dc, 0xab66, 0x2b36, 0x48ed, 0xc2fb, 0xb9e4, 0x1fea, 0xb634, 0x58bc, 0x81d8, 0x1cab, 0x10ff, 0xb306, 0x6298, 0x4064,
    0x2ff7, 0x12d6, 0xe62a, 0x2c4a, 0xbc04, 0x1ef5, 0x009f, 0xe970, 0xe0a9, 0xbc8c, 0x9cdd, 0xe5a7, 0x32ca, 0x1dca, 0x6f6b, 0xe522,
    0x642d, 0x3c29, 0x63c7, 0x094d, 0xeb5a, 0x3d95, 0x4e09, 0x18e5, 0x2fd2, 0x6a9b, 0x75d4, 0xdfb2, 0xea3d, 0x0978, 0xe485, 0x57a2,
    0xd6b0, 0xc706, 0xc005, 0xcb63, 0x9d79, 0xbfb9, 0xcf0e, 0x0a41, 0x48bd, 0xbe51, 0xb3d0, 0xa58f, 0x784d, 0xb11a, 0x488c, 0xd5b8,
    0x52dd, 0xaba6, 0x458c, 0x0d79, 0xe9ed, 0x8d5e, 0xdbe2, 0x1f56, 0xdc3e, 0x1be9, 0x896f, 0x0229, 0x8139, 0xbf5c, 0x8328, 0xdf30,
    0xbde5, 0xa8cd, 0x8731, 0x3a96, 0x51bc, 0x8703, 0x943b, 0x9465, 0xdf74, 0xbd9f, 0x4e73, 0x3994, 0xf804, 0x874b, 0x4104, 0xa0ba,
    0xc906, 0x0449, 0xb803, 0x3603, 0xbc10, 0x1619, 0xaf08, 0xb914, 0x178d, 0xbc93, 0x731f, 0x79b6, 0xbf60, 0xfe29, 0x7fce, 0xf030,
    0xffb6, 0x1035, 0x9c14, 0x6166, 0x7ae3, 0xa603, 0xc850, 0x102b, 0x746d, 0x264f, 0x355a, 0xbe12, 0x0c7c, 0xbea2, 0xcb6e, 0x30e5,
    0x443b, 0xa914, 0x19c4, 0xdc3d, 0xe803, 0xac5f, 0xaf3a, 0xe6f3, 0x8184, 0x4833, 0x097f, 0x37f6, 0x2cbd, 0x53d2, 0xc6cb, 0xb473,
    0x1aaa, 0x6211, 0xc647, 0xa84c, 0xd4f7, 0x234f, 0xe147, 0x5ad5, 0x716c, 0xd1e1, 0xab92, 0x49a5, 0xf546, 0x7e26, 0x6b21, 0x49e1,
    0xcf2c, 0xa2cb, 0x7e58, 0x5efc, 0x916a, 0xda1a, 0xa7c9, 0x710d, 0xdfeb, 0xc086, 0x9247, 0x57ba, 0x5890, 0x07d2, 0x2b43, 0x318d,
    0x1108, 0x7856, 0xca49, 0x1f8e, 0x6264, 0x7fca, 0xdecc, 0xf54f, 0x7528, 0x073c, 0x2a20, 0xe879, 0xcdf3, 0xd743, 0x5670, 0x24ba,
    0xfb16, 0x8ccb, 0x5f2b, 0x6d88, 0xe6fd, 0x96c3, 0x25a2, 0x5fdf, 0x5e4c, 0x3945, 0xe20b, 0xf0d5, 0xb0f9, 0x0b0f, 0x05af, 0x1ffd,
    0x1859, 0xc58d, 0xc269, 0xf28b, 0x7e95, 0x93e9, 0xb0a8, 0xf026, 0x2b11, 0x6386, 0x3ecf, 0x2f7f, 0x41b2, 0x1241, 0xb4e6, 0x6414,
    0x06e6, 0x7ca7, 0x3eb0, 0xcac8, 0xe3a2, 0x2ec5, 0x650e, 0x9cd3, 0x6409, 0x9736, 0x549b, 0x841e, 0xdec3, 0x2c36, 0x732c, 0xee54,
    0xd592, 0x2ce4, 0x62dc, 0x108d, 0x0e5f, 0xba26, 0xfa58, 0x0b3d, 0xc36a, 0xf02c, 0xe836, 0x1095, 0x7fc1, 0x45bc, 0xb63c, 0x005c,
    0x4925, 0x94db, 0xb966, 0xd61f, 0xbe91, 0xc3ed, 0xff17, 0x565d, 0xc2ca, 0x8007, 0xf5b7, 0x59b5, 0x6aba, 0xd52d, 0xfcb7, 0xd172,
    0x8162, 0xd9ae, 0xca31, 0x129c, 0xf6a7, 0x881f, 0x3bd8, 0xab60, 0xc04b, 0xef51, 0x548f, 0x5adf, 0x1a83, 0x19f8, 0x2311, 0x41f0,
    0x07f6, 0x37c9, 0x485e, 0x7a25, 0xc66a, 0x29c4, 0x9073, 0x4c8b, 0xa542, 0xc248, 0x7b36, 0x3c30, 0xae74, 0x7e32, 0x167d, 0xe2b6,
    0x3b04, 0x5f6c, 0x6a52, 0x8227, 0x8928, 0x249c, 0x90c9, 0x15ce, 0x2df9, 0x7f2d, 0xcc62, 0xdfcc, 0x2ce7, 0x5f9b, 0x6008, 0x181b,
    0x08f9, 0x0adf, 0x956b, 0xbb02, 0xfcf7, 0x4995, 0x67b1, 0x5f85, 0x733c, 0x19c5, 0x6982, 0x26b0, 0x625b, 0x6e0f, 0x85b4, 0x0aae,
    0x4f80, 0xb874, 0xe115, 0x2297, 0x9b1c, 0xe478, 0x3057, 0x9e04, 0xb05f, 0x14ff, 0xbee0, 0x7d4d, 0x43f1, 0xe6be, 0xcf9a, 0x85ff,
    0xcc51, 0x1955, 0xa152, 0x2461, 0x2d52, 0x435b, 0x4ebf, 0x262c, 0x44af, 0x0bc9, 0x8af0, 0x4b91, 0xde0a, 0xdc52, 0x7117, 0x052a,
    0xea97, 0xf4c5, 0x2636, 0x20aa, 0x3420, 0x03d4, 0xfc8c, 0xbae0, 0x76b3, 0xdcdd, 0x05de, 0x00f1, 0x25a8, 0x84bc, 0x19ed, 0x26e8,
    0x560b, 0xc237, 0x5dca, 0x1556, 0xed19, 0xe826, 0x7c1c, 0x72ca, 0x2523, 0xda7a, 0x11fc, 0xcb08, 0x751f, 0xaf6b, 0xb4ad, 0xd067,
    0xaf07, 0x262b, 0xd675, 0x5d84, 0x6c4a, 0xa798, 0x4640, 0xbfdd, 0xee57, 0xf414, 0x1190, 0x6ff7, 0x0348, 0xd4ba, 0x52d6, 0x354e,
    0x2971, 0xe1a2, 0xb52e, 0x00d2, 0x3ec9, 0x409f, 0xb95f, 0xd053, 0x70c6, 0x38ec, 0x5ef5, 0xd93e, 0x868b, 0xa5c4, 0x97e9, 0xfc04,
    0xa8aa, 0x199b, 0x4978, 0x8c6b, 0x3a78, 0x6eaa, 0x6aab, 0x2a3e, 0x97a2, 0x8ee5, 0xb771, 0x75a6, 0x0733, 0x2486, 0x9595, 0xf9f9,
    0x770c, 0x374a, 0x0345, 0x6fd2, 0xb4b4, 0xe2e2, 0xaa9b, 0x9e0e, 0x9965, 0xb5d4, 0x1988, 0x17e2, 0x1fb3, 0xe9ce, 0xcc1c, 0x1892,
    0x58e5, 0xc40e, 0xf797, 0x8099, 0xbd70, 0x8e09, 0x5bf5, 0xe7c3, 0xd3e5, 0xbd38, 0x7d95, 0xde46, 0xf8fe, 0x58f9, 0x2faa, 0x2b5b,
    0x57e8, 0xa3c7, 0xe21e, 0xf6f3, 0x494d, 0x731b, 0x055a, 0x828b, 0x5197, 0xca05, 0x7055, 0xa42d, 0xfb66, 0x58c3, 0x7c29, 0x97dc,
    0x9c3c, 0xb361, 0xc571, 0xf709, 0xf10a, 0x7f15, 0x948c, 0x69eb, 0x7b75, 0x914e, 0xb5b5, 0x1515, 0xd317, 0xaa5f, 0x211e, 0x17b8,
    0x4141, 0xd5d5, 0xf3ae, 0xbbcd, 0xdfb0, 0x1ab2, 0x47f0, 0x2c23, 0x2954, 0xd25e, 0x84c4, 0x5469, 0x82a8, 0x98d8, 0x43a8, 0xfc9b,
    0x73dd, 0xf80f, 0xf2c1, 0x8869, 0x2433, 0x3d31, 0xbf90, 0x5e4a, 0x5f8f, 0xad5d, 0x1cf7, 0x69a4, 0x2df6, 0x9719, 0x0e57, 0x278c,
    0xa176, 0x338e, 0x2ba0, 0xb3b4, 0x7bc7, 0x46db, 0x0bc7, 0x11c8, 0x4048, 0x79b2, 0x5c67, 0x069a, 0x2a17, 0xc8f5, 0x9726, 0x2d43,
    0x5fea, 0x43a6, 0x33f2, 0x82eb, 0x237b, 0xf9e4, 0xfa17, 0x0d04, 0x15f4, 0x9db4, 0x02fc, 0x66eb, 0xa31b, 0x4abb, 0x913a, 0x88ed,
    0xfc02, 0xeb66, 0x3449, 0xdbe5, 0x6b36, 0x933f, 0x3d5e, 0x078d, 0xaebd, 0x7dd4, 0xa915, 0xb5f5, 0xc302, 0xaa25, 0x64dc, 0x064b,
    0xd037, 0x76e6, 0xf306, 0x5ed0, 0xda92, 0xce9d, 0x25cf, 0x50ff, 0x8064, 0xcbb2, 0x33a7, 0xf77b, 0xe870, 0xa298, 0xdcb9, 0x03da,
    0x6825, 0x4574, 0xefba, 0xf634, 0xd676, 0x5dd1, 0x98bc, 0x8a72, 0xb093, 0xc1d8, 0xe8a1, 0xd272, 0x5cab, 0x15d8, 0x2388, 0x8a63,
    0x90cd, 0x355e, 0x3e2a, 0xab6a, 0x98c0, 0x5ef9, 0xe8d1, 0xff60, 0x3031, 0x69c8, 0x5959, 0x9f9f, 0xd73a, 0xbfce, 0x5039, 0x47d6,
    0x4b4b, 0x2e2e, 0x3364, 0x578d, 0xcd00, 0xb138, 0xfc93, 0xff1d, 0xcee9, 0xb31f, 0x21a7, 0xc4c0, 0xb9b6, 0xbf19, 0x83aa, 0x55dc,
    0xf914, 0xbc8f, 0xda3c, 0x4a4f, 0xa6a8, 0xef08, 0x4b59, 0xd538, 0x4ed5, 0x771a, 0x5619, 0x8e84, 0x414f, 0xe57e, 0xd2a1, 0xfc10,
    0xe6bd, 0xf803, 0xd89d, 0xdcb8, 0x7603, 0x8b16, 0x0d20, 0x52eb, 0x4933, 0xfd25, 0xf07d, 0x0907, 0x027d, 0xfb24, 0x4449, 0xe124,
    0x057d, 0x276d, 0x6baf, 0x1f75, 0xd356, 0x6a4c, 0xfd9f, 0x10e1, 0x0d42, 0x8e73, 0xfaee, 0x6777, 0x7994, 0xd4e8, 0xe682, 0x673e,
    0xeefa, 0x7767, 0xc74b, 0x6274, 0xa9f9, 0xa02c, 0x4c95, 0x3805, 0xe0ba, 0x8cfc, 0x76f9, 0x4d12, 0xcdea, 0x8104, 0x71ac, 0x7b42,
    0xa1b7, 0xc731, 0x92a3, 0xa337, 0x7a96, 0x7134, 0xf206, 0xb1d3, 0xfdbc, 0xb887, 0x6026, 0xfde5, 0x8bd3, 0x5d3e, 0xe8cd, 0xe4a8,
    0xd465, 0x7281, 0x74f9, 0x2f4e, 0x2a38, 0xd43b, 0x3f6f, 0xee21, 0xa8e0, 0x50ef, 0xc703, 0x77a9, 0xba69, 0xefbc, 0x93a1, 0x91bc,
    0x5f56, 0x3d20, 0x3a44, 0x24fe, 0xef05, 0x1be3, 0xd47d, 0xbdae, 0xa4f3, 0x2e83, 0xcd5e, 0xec77, 0x0f50, 0xd080, 0x794d, 0x29ee,
    0xf906, 0x858c, 0x2759, 0xba05, 0x4d79, 0xee29, 0xd2b6, 0x419f, 0x07de, 0xad21, 0x808e, 0x92dd, 0xeb82, 0xf233, 0xeba6, 0x785e,
    0x860f, 0xa692, 0xff5c, 0x3e8e, 0x8bfa, 0x0291, 0x2258, 0xc139, 0x1f31, 0x0b47, 0x13f6, 0xb2ba, 0x24b1, 0xc328, 0x9841, 0xe765,
    0x4caf, 0xdd0c, 0x9394, 0x1c3f, 0xcde4, 0x2cdc, 0x5be9, 0x05e5, 0x6bf9, 0xc96f, 0x5e19, 0xb7d9, 0x4229, 0x8955, 0x69d5, 0x946b,
    0x21f9, 0x0006, 0x0412, 0x37ab, 0x0b64, 0xdca4, 0x09f7, 0x71c5, 0x4d5b, 0xa931, 0xde9a, 0x16b1, 0xb173, 0x9aec, 0x0707, 0x9e9e,
    0x4a41, 0xf35f, 0xed09, 0xc6b1, 0xeded, 0x0f0f, 0x0df7, 0xfdf9, 0xf67f, 0x4384, 0xffb9, 0x443c, 0x5ed2, 0x5429, 0xd4bd, 0xdd79,
    0xbb8f, 0x6764, 0x5830, 0x88bd, 0xddf0, 0xf786, 0xfe51, 0x883e, 0x4054, 0xf3d0, 0x5992, 0x6709, 0xe58f, 0x1789, 0x8a22, 0xd89e,
    0x73c4, 0xfbc5, 0xf11a, 0x0a80, 0xf9ea, 0x5d85, 0xa462, 0xb84d, 0x15b9, 0x0dc7, 0x0ead, 0x078a, 0x5667, 0x888c, 0xa1c4, 0x5911,
    0x9208, 0x0d92, 0xc88c, 0xf382, 0x90b7, 0xb876, 0x65d1, 0x9667, 0x9911, 0x5e70, 0x5261, 0x2be6, 0x2c2d, 0xe1c4, 0xbf97, 0x679f,
    0x9295, 0x267a, 0x3045, 0x55b9, 0x1a3b, 0x8339, 0x4dc7, 0x8d4a, 0xb96c, 0x4ead, 0xd58c, 0x8853, 0x478a, 0xf800, 0xed9c, 0x6ad2,
    0xf84d, 0x0c91, 0x16f1, 0xff05, 0x04f5, 0xe462, 0x0a18, 0x2f72, 0xfa46, 0x0fb7, 0x9d85, 0x03ce, 0x4856, 0x5226, 0xaca4, 0x39eb,
    0xe639, 0x311b, 0x0170, 0xd8f2, 0x4a80, 0x9061, 0xae2f, 0xc5f2, 0xfc5f, 0x5975, 0x56ad, 0xb3c4, 0xe05c, 0x7c47, 0x3bc6, 0x82c7,
    0xe95c, 0x64fc, 0xefda, 0x8054, 0x1d17, 0x7629, 0x33d1, 0x94ac, 0x121c, 0x9992, 0xb096, 0xb97f, 0xa709, 0x2fca, 0x4998, 0xd925,
    0xc723, 0xe4d8, 0x5789, 0x4cb5, 0xb2a5, 0x5059, 0xda5c, 0x2590, 0x189f, 0x69f5, 0x2779, 0x1a2f, 0xdeba, 0xca22, 0xcdb1, 0xfe71,
    0x7b56, 0x9830, 0x82e8, 0xff37, 0xc8bd, 0x6028, 0xe135, 0xc46a, 0xc2a0, 0x734c, 0x5f4b, 0xfb8f, 0x357a, 0xa7b7, 0xa764, 0xe167,
    0xc83e, 0x158b, 0xc468, 0x04e4, 0x3f4d, 0x3e52, 0x2231, 0x56e3, 0x898f, 0x5b0c, 0x3787, 0xaf28, 0x7d58, 0x6f8b, 0x7381, 0x1df1,
    0x3dfa, 0xf92e, 0x8adb, 0x59f4, 0xfbd9, 0x4df7, 0x6b6d, 0x467d, 0xef60, 0xad82, 0x4f0f, 0x5eaa, 0xec03, 0xb706, 0x008d, 0x2dee,
    0x7a88, 0x2d0a, 0xf8c9, 0xb9d2, 0x06b2, 0x3763, 0x8197, 0xd60c, 0xda9f, 0x207e, 0xcad8, 0x8a41, 0x5ad2, 0x0a03, 0x3360, 0x3b80,
    0xe7b8, 0x4d23, 0x9429, 0x5d1d, 0xcc53, 0x2536, 0x11d2, 0x9ed2, 0x1d7a, 0xaef6, 0x80d7, 0xa956, 0xee4b, 0x14be, 0x9a81, 0x1cfe,
    0x3a9c, 0x776a, 0x3260, 0x3680, 0xcefc, 0xcb3f, 0x8384, 0x3ef8, 0x9a32, 0x3fba, 0x5114, 0xc4f6, 0x843c, 0xf334, 0x98e3, 0xdbd0,
    0xa373, 0x4412, 0x2230, 0x963d, 0x77ab, 0x2051, 0xff39, 0xc0c3, 0x2533, 0x3824, 0xf17b, 0x61f9, 0x5196, 0x50ee, 0x4006, 0x841d,
    0xb1c5, 0x8747, 0x75e5, 0x1c1a, 0xb474, 0x49f7, 0xfd82, 0xf8a7, 0xaa6c, 0xa8f6, 0x1ca5, 0x4795, 0x1c0e, 0x46f1, 0x389b, 0x4b64,
    0xfb25, 0xcdd1, 0xc488, 0x8d5b, 0x9da5, 0x5d01, 0xe931, 0x65f1, 0xcaf8, 0x1e9b, 0x6e68, 0x83a4, 0x56b1, 0x2270, 0x2250, 0x2674,
    0x8203, 0x480d, 0xdaec, 0x5e54, 0x3501, 0x7d40, 0x226c, 0xf173, 0xde9e, 0xe8d5, 0x0349, 0x43ac, 0x7323, 0x4707, 0xc26d, 0x2315,
    0x20a3, 0xa735, 0x930a, 0x5f31, 0xb077, 0xc156, 0x4b47, 0x749f, 0xb490, 0x53f6, 0x39f1, 0xd775, 0xf2ba, 0x0d0e, 0xa3ae, 0x96fd,
    0xe8bf, 0x0fdc, 0x0329, 0x1600, 0xbb88, 0x5029, 0xda6b, 0x64b1, 0x2766, 0xbac4, 0x8e3c, 0xfc81, 0x6400, 0xd841, 0x2c75, 0x630e,
    0x765a, 0x3f5d, 0xc0b3, 0x0dab, 0x7e8e, 0xc725, 0xedbf, 0x0d44, 0x2495, 0x536e, 0xf1f4, 0xc60f, 0x58a9, 0xb55f, 0xe692, 0xba16,
    0x013a, 0x36f5, 0x4254, 0xa0db, 0xef46, 0x6258, 0x0c2f, 0x4c83, 0xe59a, 0x587f, 0x4291, 0x67fb, 0xfd8d, 0x5fc2, 0xe8b5, 0xcbfa,
    0x7bd6, 0xe506, 0xc955, 0xd2a4, 0x2873, 0xe69c, 0xadca, 0x8229, 0xd46b, 0xa0b6, 0x7303, 0x53be, 0x972d, 0xa9d5, 0xc4ec, 0x9758,
    0x5d30, 0x3987, 0x6d11, 0xabf9, 0x5944, 0x5bd7, 0x0970, 0x3efb, 0x0797, 0x9e19, 0x9713, 0xa3f9, 0xf7d9, 0x4b80, 0x2246, 0xe083,
    0x45e5, 0xcdae, 0x969d, 0xd74f, 0x09e5, 0x9be9, 0x22f5, 0xf946, 0x191d, 0x7bef, 0x6cdc, 0x7166, 0xae9a, 0x4b75, 0x2670, 0x0de5,
    0x7ac7, 0xd394, 0xfe3f, 0xd8d0, 0x5c3f, 0x4cf8, 0xcf42, 0x963e, 0xfed9, 0xa450, 0xb1e9, 0x8caf, 0x35e4, 0x1631, 0x1d0d, 0x1428,
    0x2d80, 0x7a44, 0xf0c0, 0xecd9, 0x64fe, 0x4100, 0x8cfe, 0xaa89, 0x28c7, 0x4a70, 0x89f1, 0x9f56, 0x6a99, 0x12af, 0x7d20, 0x8905,
    0xfdae, 0x0548, 0x0923, 0x950a, 0xad55, 0x147e, 0xd7b4, 0x62c9, 0x058a, 0x66bb, 0x5be3, 0x621c, 0x2c5d, 0x4668, 0x3fb4, 0x2f06,
    0xfc7a, 0x6aed, 0x224c, 0xe4f3, 0xcc6e, 0x5a0f, 0x6e83, 0x5109, 0x20be, 0x0d5f, 0xc507, 0x7c0a, 0x2c78, 0xbc63, 0x4b8f, 0x3ea1,
    0xf4e9, 0x1b92, 0x1081, 0x8567, 0xde97, 0x9ba7, 0x462e, 0x4f50, 0x69ee, 0x8de6, 0x2c7f, 0xbc48, 0x5492, 0xb94d, 0x887c, 0xe209,
    0x819f, 0x31a8, 0x25bd, 0x7cc2, 0x0e7a, 0x12b7, 0xcc7d, 0xe6d9, 0xa5c2, 0x98aa, 0x2e2a, 0x70c3, 0xea58, 0x1cc6, 0xb81e, 0x8d79,
    0xfdd7, 0x6759, 0x4b74, 0x3579, 0xfa05, 0xc6cc, 0x5e34, 0xf24e, 0x7727, 0x82a6, 0xb4c8, 0x3907, 0xa336, 0xf796, 0xc58c, 0x3d4c,
    0xf4cb, 0x027e, 0x3234, 0x87c5, 0x9c71, 0x0bb5, 0x956d, 0x2b83, 0xb85e, 0x04c7, 0x91ba, 0x037e, 0x8415, 0x2ba7, 0xbf7e, 0xa3b8,
    0x4341, 0x63b6, 0x8a7c, 0x47de, 0x84ea, 0x3e86, 0xed21, 0x3840, 0x947a, 0xc08e, 0x81e3, 0xd4bb, 0xd2dd, 0x3b3e, 0xec2a, 0xcf57,
    0x7805, 0xa67e, 0x387b, 0xde74, 0xd22a, 0x8c95, 0x1066, 0xd979, 0xef8f, 0x958f, 0xe02c, 0xf350, 0xafce, 0xe500, 0xd05d, 0xe9f9,
    0xc6f5, 0x074c, 0xa055, 0xb828, 0xa274, 0x4dd6, 0xfd44, 0x68da, 0x7339, 0xf76e, 0xa53a, 0x2efb, 0x370b, 0x7933, 0xb767, 0xa082,
    0xc66c, 0x854c, 0xc104, 0xca74, 0x3c68, 0xeaf1, 0x1bac, 0x0deb, 0xbb42, 0xe3ba, 0x8bb9, 0x84cb, 0x9cca, 0xb1ac, 0x46d1, 0x02ab,
    0xcb84, 0xb98b, 0x66a1, 0x20bb, 0xcb79, 0x4db3, 0xccfc, 0x2455, 0xdfc6, 0xb6f9, 0x472a, 0xd372, 0x8d12, 0x273a, 0xd02d, 0x3ac9,
    0xe126, 0xabaf, 0x2f74, 0xd685, 0x5f75, 0x94e4, 0xc596, 0xa2d4, 0xf4ce, 0x3753, 0xf818, 0x457d, 0x2776, 0x2e37, 0x676d, 0xdd15,
    0x50e1, 0x1765, 0x13c2, 0xd724, 0xcb9d, 0x3da0, 0xc69d, 0xb553, 0xe700, 0x284e, 0xaa4c, 0xbfe7, 0xca08, 0xe992, 0x83a0, 0x1357,
    0x89d4, 0x476c, 0xc8a9, 0x4d42, 0x5855, 0x2977, 0xce73, 0x3f8d, 0xbcdb, 0x3aef, 0xb6db, 0xdbb6, 0xa777, 0x2370, 0x675a, 0x1b77,
    0x6997, 0x9769, 0x14e9, 0xb757, 0xa374, 0xc770, 0x4775, 0xb994, 0xa73e, 0x3990, 0x6af6, 0x63bf, 0x6505, 0x2683, 0xcdda, 0x7773,
    0x6556, 0x8821, 0x2fbd, 0x4f37, 0x21da, 0x48a5, 0xf291, 0xfa69, 0xd1bc, 0xcd3d, 0x47f7, 0x5346, 0x2ebc, 0xd3a1, 0x18db, 0xeda2,
    0xba5b, 0xc767, 0x6e64, 0xe8e0, 0x6085, 0x6cfb, 0x90ef, 0x37b6, 0x1a90, 0x0704, 0x4613, 0xdad8, 0xb7a9, 0x09d0, 0x8727, 0xaacf,
    0x2e22, 0xa972, 0x6fea, 0xfe2c, 0x72d4, 0x7f6f, 0x663d, 0x4a44, 0xeffc, 0x0874, 0x143c, 0xa25e, 0xc102, 0xd850, 0x386a, 0x6a38,
    0x915e, 0xb4f9, 0x75c5, 0x9995, 0x6f4e, 0x4e6f, 0xc620, 0x1721, 0x0e03, 0xbf88, 0x1b5a, 0x1466, 0xc359, 0x4f35, 0xb281, 0x8577,
    0x3279, 0xa36b, 0xabd1, 0x3dbd, 0x8d18, 0x9c80, 0xf887, 0x3598, 0xa80f, 0xa026, 0x9c6f, 0xde39, 0x3de6, 0x2773, 0x228d, 0x0075,
    0x91ae, 0x8984, 0x9d3e, 0x7243, 0xde7c, 0xe755, 0x53d3, 0xcbd3, 0x24a9, 0x9b72, 0xf57f, 0xe69a, 0xe399, 0x28ce, 0x9069, 0x85e1,
    0xefd9, 0xd2a3, 0xe125, 0xae31, 0xe337, 0x36d7, 0x8688, 0xf5bf, 0x11d0, 0x5bb2, 0xb454, 0xe1b7, 0xec34, 0x24b9, 0x0732, 0xd4e7,
    0xf1d3, 0xbaea, 0xc960, 0x9b8c, 0xe7d4, 0x3207, 0x51a2, 0x44e7, 0x52d7, 0x9665, 0xb134, 0x5920, 0x6188, 0x3cd7, 0x2cb3, 0xba96,
    0xb878, 0x7e2a, 0xbf1b, 0x3d99, 0xeb6a, 0xaf6f, 0x8e77, 0x1be7, 0xa2e0, 0x5681, 0xcaf4, 0xd0cd, 0x7eb4, 0x9674, 0x755e, 0xe7cd,
    0x3f61, 0x2bab, 0x3fbe, 0x3e56, 0x0750, 0x28d2, 0x961d, 0x3c98, 0x897c, 0xbc2d, 0x9ef9, 0x3c91, 0x6ba4, 0x6122, 0x4300, 0xd8c0,
    0x5532, 0x14e0, 0x3a2b, 0x7031, 0x99fc, 0x59b3, 0xa9c8, 0x424d, 0x5c57, 0x9959, 0x647d, 0x9503, 0xdf9f, 0xdf70, 0xc999, 0x99c9,
    0x8b13, 0x0cd0, 0xffce, 0x8740, 0x9245, 0x4592, 0xaec9, 0x173b, 0x87d6, 0x22d0, 0xa353, 0x51e6, 0x3ea7, 0x9039, 0x2c64, 0xc837,
    0x3f1e, 0xae32, 0xdefd, 0xe9cc, 0x6583, 0x3c94, 0x0b1b, 0x7d2a, 0x6fc1, 0xf285, 0xf138, 0x388c, 0x54ed, 0xa771, 0x2031, 0x0d01,
    0xd42d, 0x7364, 0x5ca9, 0x2936, 0x978d, 0xe768, 0xdd89, 0x8dcb, 0x095a, 0x5d11, 0x8295, 0x8b4b, 0x5085, 0xbd24, 0x6e2e, 0x2d26,
    0x18dd, 0x55da, 0xff19, 0x1153, 0x171e, 0x7814, 0xc6df, 0xf9b6, 0x95dc, 0xc578, 0x4ea2, 0x4bb7, 0xcabf, 0xc3aa, 0x1344, 0xfdd8,
    0x69d3, 0xb74e, 0xeeae, 0x0eea, 0xd8fd, 0x4413, 0xf31f, 0x4a0a, 0x25c9, 0x61a7, 0x279d, 0x7419, 0x04c1, 0x74ca, 0x682b, 0x5a7f,
    0x5418, 0x698e, 0x080a, 0x8ed5, 0xce20, 0xe1ee, 0xb71a, 0x1189, 0x0f22, 0x9619, 0x5176, 0x150e, 0xce84, 0x4a04, 0xd0bd, 0x175a,
    0xd457, 0x8f81, 0x257f, 0xa92a, 0x38a1, 0x039c, 0xa0f8, 0x814f, 0x3c11, 0x9352, 0xabf6, 0x152b, 0x06dd, 0x12a2, 0x301b, 0xfdb5,
    0xec1f, 0x1a3d, 0x8861, 0xd73c, 0x8a4f, 0x2a48, 0x83fd, 0x47a3, 0x622a, 0x3fe3, 0x49a8, 0x3915, 0xeacb, 0xa407, 0xfc8f, 0x43ea,
    0x1539, 0xa849, 0x8375, 0x61bd, 0x2d70, 0x8b59, 0x3c9f, 0x6f64, 0x8886, 0xbff5, 0x2f09, 0x8d71, 0xdae6, 0x66fc, 0x75c8, 0xe6a8,
    0xf095, 0xaad1, 0x3b25, 0x0b3f, 0x6c74, 0x93bd, 0x1e97, 0x427d, 0x2125, 0x5720, 0x34ce, 0xb932, 0x7c9e, 0x8449, 0xaba3, 0x3285,
    0x2f40, 0x9760, 0xf15b, 0x8933, 0xb2ad, 0x6570, 0x3d26, 0x2cbe, 0x8fa7, 0x307e, 0x2049, 0x61af, 0x4907, 0xd0dc, 0xc8b1, 0x618e,
    0x92eb, 0xbd9b, 0x3d66, 0x444a, 0x2196, 0x4d20, 0xc4ce, 0x9af4, 0xbded, 0x17f0, 0xcb16, 0x16cb, 0x5477, 0x4b99, 0x2a8c, 0xb603,
    0x9e18, 0x189e, 0x8b4a, 0xaa4b, 0x1cb9, 0x4699, 0x7a77, 0x0237, 0x59c3, 0x354f, 0xe541, 0x26be, 0x96c2, 0xf0e3, 0x3804, 0xaa9a,
    0xe369, 0xbcd2, 0x681e, 0x9f8f, 0x694c, 0x3514, 0xed5d, 0xf43a, 0xfe03, 0x5cf7, 0x8ce3, 0xa85d, 0xa9a4, 0xe183, 0x3743, 0xd32b,
    0xc73d, 0x1a69, 0xd719, 0x81a6, 0x84fd, 0xacae, 0x5786, 0x6df6, 0x678c, 0x3a92, 0x938d, 0x2571, 0x2b08, 0x4e57, 0xb8c2, 0xf594,
    0x047f, 0x32c2, 0x8177, 0x403c, 0xc869, 0x3130, 0x5656, 0xe7e7, 0x27cf, 0xd91b, 0xa7c2, 0xb3dd, 0x783a, 0xaa6e, 0x3810, 0x21fb,
    0x9e4a, 0x1661, 0x01e9, 0xb2fa, 0x2220, 0xff90, 0x1ccc, 0x9218, 0xf08d, 0xd582, 0x7d31, 0xfaa5, 0x8b8b, 0xd2d2, 0x8d57, 0x6433,
    0x3bd0, 0x4c03, 0x08f6, 0xce67, 0x64e3, 0x495c, 0xe338, 0x6a17, 0x6d43, 0x1b88, 0x4506, 0x5e3f, 0x637d, 0xd726, 0x72ae, 0xe87b,
    0x7759, 0x3ae6, 0x77ef, 0x8048, 0x49cc, 0xc9d2, 0xb9b2, 0xf61c, 0xc8d9, 0x9c67, 0xf768, 0x8f73, 0x469a, 0x71cf, 0xaf34, 0x78da,
    0x51c8, 0xb202, 0x1f59, 0x40e5, 0x7462, 0x4bc7, 0x0eb0, 0x09b6, 0xf24f, 0xfc77, 0x86db, 0x2c57, 0xadb4, 0x67d0, 0xbb2f, 0xbbc7,
    0x7eee, 0x6ba0, 0xff3a, 0x5ceb, 0xf3b4, 0xd19d, 0x2034, 0xd403, 0x3403, 0xc4e2, 0x7a68, 0xe176, 0xb00e, 0xb609, 0x738e, 0x420d,
    0x5212, 0x0572, 0x938c, 0x300c, 0x370a, 0x6121, 0xed9b, 0x630d, 0x560a, 0x2e2d, 0x46ca, 0xdc3c, 0x3826, 0xf5c2, 0xf361, 0x1e16,
    0xa9eb, 0x529f, 0xcab8, 0x78fc, 0x3e10, 0xd48c, 0xf0a5, 0x5f72, 0xcbe9, 0x732f, 0xbf15, 0x3893, 0x9f0f, 0x6fd5, 0x8442, 0x310b,
    0x9f41, 0xb6d2, 0xb857, 0xbb75, 0x97d0, 0x1b4a, 0xd14e, 0x5b28, 0x15a9, 0xf5b5, 0xced3, 0x4677, 0x5515, 0x6333, 0xa0af, 0xa4ed,
    0xef1e, 0xecbe, 0xea5f, 0xa643, 0x807a, 0x0684, 0x2bdf, 0x1318, 0x57b8, 0x75bb, 0x80d0, 0x500f, 0x3ec6, 0x611e, 0x205e, 0xbfa1,
    0x6c23, 0xa4b4, 0xec93, 0x09f4, 0xa966, 0x87f0, 0x3647, 0x42dd, 0x9aa2, 0xbc23, 0x5ab2, 0x859c, 0xf560, 0x6c30, 0x4bfc, 0x1fb1,
    0x37f7, 0x33af, 0x8493, 0x1125, 0xfbcd, 0x872d, 0xaf97, 0xfe5d, 0x2d65, 0x54e3, 0xea1e, 0x8141, 0x88c3, 0x138f, 0x15d6, 0xccc0,
    0xec9a, 0x73b1, 0xd8d8, 0x4040, 0xfd26, 0x3450, 0x3b60, 0xc2a8, 0x3c9c, 0x61b3, 0xeda6, 0xd689, 0x2f76, 0x83a8, 0xe20d, 0xd8d4,
    0xc2bd, 0xdbad, 0xc484, 0x6954, 0x4bf0, 0x59dc, 0x125f, 0x8848, 0xfdfd, 0xc4c4, 0xf9fd, 0xf70d, 0x9469, 0x91cb, 0xee58, 0x7a29,
    0x3dce, 0xdda3, 0x55d8, 0xaf9e, 0x9e36, 0x2bcd, 0xfa1e, 0x9cab, 0xca63, 0xbdb8, 0x23d8, 0x399f, 0x1238, 0x6388, 0xd13c, 0x976b,
    0x719e, 0x2367, 0x5b74, 0xf093, 0x738b, 0x88ea, 0x01d9, 0x8a88, 0xed89, 0x28a2, 0xef40, 0x300d, 0x1273, 0xb274, 0xd938, 0x1257,
    0xca72, 0x1c7c, 0x3b4e, 0x93b5, 0xfc35, 0xd8bc, 0xddc6, 0xd699, 0xf976, 0x124d, 0x9dd1, 0xb4f3, 0xbf49, 0x0d14, 0x12fc, 0x1677,
    0xc7bb, 0x2fbb, 0x7d05, 0x6d27, 0x3635, 0x7883, 0x5e8a, 0x3b96, 0x4e3b, 0xb593, 0xbc84, 0xa825, 0xdd28, 0xdc31, 0x8574, 0xaf85,
    0xed4b, 0xa76e, 0x006d, 0xc064, 0xbd03, 0xc034, 0x0bb3, 0x36d8, 0xb6a4, 0x73a7, 0xb59d, 0x5774, 0x377c, 0xbde1, 0xbe7a, 0x5761,
    0x80f6, 0x772e, 0xe298, 0x08e2, 0xb627, 0xa288, 0x5644, 0x2871, 0x43da, 0x8070, 0xe88e, 0x1294, 0x41a9, 0x1cba, 0x768f, 0xf738,
    0x8624, 0x3307, 0x7e7e, 0x6565, 0x9ed0, 0x1c6b, 0x99cf, 0xb9a0, 0xcd90, 0x5e35, 0xfb21, 0x1038, 0xe326, 0x5832, 0xb6e6, 0x034b,
    0x90ff, 0x2022, 0xa721, 0xc0c4, 0x2ca6, 0x65cf, 0x7404, 0xec96, 0x2d2d, 0xb8b8, 0x0e9e, 0x9baa, 0x6a7e, 0x280b, 0xb4d5, 0x1a93,
    0x478d, 0xa8c9, 0xdd64, 0x274a, 0x0cd3, 0x7d5e, 0x465d, 0x2817, 0xa9b9, 0x9f3b, 0xd33f, 0x62b5, 0x103b, 0x6395, 0xfeb6, 0xab36,
    0xe0ac, 0x7449, 0xdda2, 0xe368, 0x1be6, 0x1065, 0xc155, 0x90b6, 0x9f9e, 0x05dd, 0x264e, 0x3c03, 0x0266, 0xde5f, 0x2b67, 0xd214,
    0xf1df, 0xc93f, 0xea25, 0xc143, 0x4e91, 0x757b, 0xcdcd, 0x0303, 0x464b, 0x6696, 0xfbb9, 0xae81, 0x640b, 0xa4dc, 0x89d6, 0xa6ed,
    0xb15c, 0x1b6e, 0x3664, 0xeebd, 0xaddb, 0xbdc2, 0xbdd4, 0x79dd, 0x9b4f, 0xe915, 0xfceb, 0x73ad, 0xf5f5, 0xa4a4, 0xcdbb, 0xaef3,
    0xa3f6, 0x73f2, 0xf497, 0x24cd, 0xc2eb, 0x1d3a, 0x0ce5, 0x4a55, 0xe453, 0xf23e, 0x99bd, 0x9fea, 0x0a82, 0x9edd, 0x83a6, 0xd020,
    0x4d04, 0x0980, 0x241c, 0xc1f7, 0x3be0, 0x3a18, 0xab48, 0x5632, 0x68f3, 0x293d, 0x39e5, 0x151d, 0x0ba1, 0x11aa, 0xf90e, 0x637b,
    0x28ac, 0x6751, 0x9a04, 0x55f4, 0xe5db, 0x4934, 0xddb4, 0x3ad1, 0x0331, 0x42fc, 0x2edf, 0x49a2, 0xa6eb, 0x5e78, 0xbeec, 0x1eef,
    0xfa0c, 0xb695, 0x8abb, 0x5075, 0x7746, 0xd3ce, 0x05ef, 0xe31b, 0xc8ed, 0x4bcf, 0xed3f, 0x01c7, 0xb4dd, 0xd13a, 0xb49d, 0xf415,
    0x2fd0, 0x6636, 0x744a, 0xa0e6, 0x60aa, 0xafb8, 0x0491, 0xdce8, 0xb708, 0xcf32, 0xee2b, 0x2a98, 0x5a9d, 0xd972, 0x34c6, 0x0cad,
    0xfae0, 0x081d, 0xd6c0, 0x1463, 0xdf53, 0x3c8d, 0xb3ef, 0x0097, 0x5213, 0x218f, 0x43d4, 0x5168, 0x2947, 0xe551, 0x83eb, 0x7420,
    0xebc7, 0xc8a0, 0x8aee, 0xb6b3, 0x1e85, 0x31a1, 0x1cde, 0xa2bc, 0x2560, 0x45de, 0xeb26, 0x3a51, 0x40f1, 0xa1d5, 0x5a4e, 0x3d14,
    0xb239, 0x16ea, 0xc4bc, 0xf0d3, 0xad3a, 0x728d, 0xd2e4, 0x65a8, 0x66e8, 0x7a65, 0x9a27, 0x72ed, 0xc260, 0x59ed, 0x2d33, 0xf69b,
    0xb2ca, 0x539d, 0x336a, 0x796f, 0x8689, 0xbc1c, 0xa9b6, 0xfd22, 0x4af7, 0xf248, 0x2827, 0x1b7d, 0x88b2, 0xaeb7, 0xafe3, 0x2d1a,
    0x8e65, 0x9dca, 0x80b7, 0x506d, 0x5556, 0x98d6, 0xf44c, 0x2b25, 0xc7dc, 0x6d9e, 0x9da1, 0x960b, 0xc4a2, 0x62ae, 0x0238, 0xb1dd,
    0x3288, 0xf30d, 0xef6b, 0x5cc8, 0xc48b, 0xc7f2, 0x939f, 0xb51f, 0x1068, 0xd341, 0xc6cd, 0x6716, 0xf282, 0xf4ad, 0xe019, 0x3271,
    0x77ac, 0x4d39, 0x1e6e, 0x6523, 0x6606, 0xaeb0, 0x1a7b, 0xdd77, 0x13bc, 0x51fc, 0xd799, 0xfb9b, 0x0b09, 0x51b8, 0xaed6, 0xc7af,
    0xfcd1, 0x89cb, 0x8676, 0x2e58, 0xe287, 0x7dcd, 0x3415, 0x3bb9, 0x9ad3, 0x5190, 0xe0e5, 0x344c, 0xaff7, 0x37a5, 0xd1f0, 0x052d,
    0x7986, 0xf076, 0x14bb, 0x8b8e, 0xf875, 0x0723, 0x5cfd, 0x4348, 0x754e, 0x2acb, 0x6935, 0xce76, 0x1850, 0x92d6, 0x1979, 0x53c1,
    0x380f, 0x1676, 0x40f0, 0x0c1c, 0x9d84, 0xc60e, 0xbb41, 0x9958, 0xfd93, 0x5ad4, 0x6c49, 0xef07, 0x4b0e, 0xb46c, 0x662b, 0x0a31,
    0xffdd, 0x86ff, 0xa561, 0x90dd, 0x6bf1, 0x8640, 0x4bd9, 0x43c0, 0xf27f, 0xbf59, 0xe798, 0x6cc4, 0x56bd, 0x9a8b, 0x4a11, 0xac4a,
    0xdcc0, 0x94ef, 0xe5c4, 0x68fe, 0xac25, 0xee5f, 0x49de, 0xc68b, 0x3c05, 0x68dc, 0xa60b, 0x30e7, 0xc584, 0xd7e9, 0x2516, 0x1573,
    0x6730, 0x4763, 0x4834, 0xb0c6, 0x024f, 0x2b98, 0x78ec, 0x29a1, 0xb941, 0x9ef5, 0xce61, 0x174c, 0x193f, 0x3a57, 0x3936, 0xf1c8,
    0x1054, 0xecf6, 0x11b2, 0x4306, 0xa130, 0xf95f, 0x0908, 0x364f, 0x98ed, 0x50d0, 0x809f, 0xfd32, 0x5203, 0xe080, 0x7374, 0x7ec9,
    0xe078, 0xf52e, 0xa46e, 0x80df, 0x40d2, 0x10eb, 0x1b9a, 0x20e9, 0xe30f, 0xb7b1, 0x52b0, 0x6971, 0x1191, 0xccea, 0x21a3, 0x62ef,
    0xde0e, 0xcf30, 0xc52d, 0xe0ad, 0xa31f, 0xea9b, 0xa9fd, 0x07e2, 0xd989, 0xb12e, 0x22e3, 0xd542, 0x2c42, 0x4355, 0x65ed, 0xf4b4,
    0xfd91, 0x4345, 0xcc57, 0xc2a4, 0xafd2, 0x327d, 0x38a5, 0x095e, 0xe049, 0x0573, 0xac29, 0xb70c, 0xadb8, 0x9f45, 0x774a, 0x4e3f,
    0x3152, 0x26dc, 0x29cf, 0xe8a8, 0x5b7f, 0x9b55, 0xedad, 0x5fb3, 0x5892, 0x9461, 0x3c6a, 0x464d, 0xf01d, 0x0c1d, 0x4aca, 0xb39e,
    0x4b35, 0x3f84, 0x3240, 0xd965, 0x04a8, 0x1906, 0xf5d4, 0x4fa9, 0x1422, 0x5988, 0xd015, 0xda59, 0x57e2, 0x8dfe, 0x592d, 0xce42,
    0x6d66, 0x8978, 0x3f99, 0x4010, 0xcc6b, 0xf5c0, 0x3ed8, 0x9250, 0x05e7, 0x1991, 0x1d00, 0xe8aa, 0xfaf7, 0x21b0, 0x599b, 0x5e22,
    0x6a3e, 0x34f5, 0x955b, 0x5304, 0x7838, 0xaaab, 0x132a, 0x91f1, 0xc18b, 0xed0f, 0xaeaa, 0xe1e0, 0xe045, 0x115a, 0x52f5, 0x7a78,
    0xe0ee, 0xce6a, 0xeb2f, 0xd7a2, 0xc75c, 0x2eeb, 0xcee5, 0xd01e, 0x8cec, 0xf771, 0xcedc, 0xfa06, 0xb5a6, 0xef49, 0x2ee8, 0xfcf4,
    0x517f, 0x2052, 0x6486, 0x27a6, 0x9c78, 0x461c, 0xb6e4, 0x4733, 0x39fa, 0x971c, 0xc510, 0x81ec, 0xb09f, 0xd595, 0x6e71, 0x511d,
    0x65bf, 0xa8eb, 0x98c3, 0x4b1d, 0xd9e7, 0xefe5, 0x9ab4, 0x3b67, 0xd7dc, 0x7e28, 0xe917, 0x4db5, 0x93e0, 0xbc29, 0x606e, 0x77ca,
    0x056f, 0x296e, 0x153c, 0x9197, 0xf3ec, 0xf2f7, 0x0a06, 0x9b09, 0xec1d, 0xb055, 0x2ee2, 0x540a, 0xe42d, 0xae1d, 0xc68e, 0x60ce,
    0xc28b, 0xff6a, 0x583e, 0x0d31, 0x92b1, 0x455a, 0x15e8, 0xda4a, 0xf7a5, 0xe6e9, 0xb31b, 0xd683, 0x33bf, 0xf2cf, 0xf314, 0x894d,
    0x7882, 0x221f, 0x4fa8, 0xd2e3, 0x36f4, 0xe638, 0x873f, 0x66a0, 0x07d1, 0xca3f, 0xe123, 0x97e8, 0xc277, 0x909d, 0xe3c7, 0xc655,
    0x7e9d, 0x584c, 0xe92d, 0x13e6, 0xeb3d, 0x8372, 0xfd38, 0x29dd, 0xef79, 0xbd95, 0xc753, 0x8afc, 0x1e47, 0x40fe, 0x11c0, 0x8eed,
    0x1f67, 0xf672, 0x98f9, 0x8185, 0x614d, 0xb865, 0xd8e6, 0x38ff, 0x6b5b, 0xea33, 0x9a12, 0x8ec7, 0x7e8c, 0x6faa, 0x5bc8, 0x3b5c,
    0x82f6, 0x3798, 0xe91f, 0x16ff, 0xc099, 0x9437, 0xc496, 0xf07e, 0xf5fd, 0x225a, 0x3242, 0x98e5, 0x96ab, 0x5b30, 0x040f, 0xc0c1,
    0x27c4, 0x886f, 0x3d74, 0x3cdf, 0xff27, 0x9bf5, 0xc4d6, 0x3a39, 0xc8b7, 0x6201, 0xce09, 0xc112, 0xfddf, 0x6ff8, 0xe133, 0xfd70,
    0x7fe4, 0x521f, 0xbfff, 0x1ffb, 0x5f12, 0x4888, 0x8443, 0x7ff6, 0x7aac, 0x737e, 0x4c4c, 0xdfdf, 0xad73, 0xebfc, 0xb0df, 0xb21a,
    0x0404, 0x8d8d, 0x7115, 0xe43e, 0x1e21, 0xb817, 0x3fc9, 0xdff1, 0x3566, 0x0dde, 0xa5a2, 0xbf0d, 0xab37, 0x1204, 0x762f, 0xa883,
    0x9105, 0x3872, 0x4002, 0xac47, 0x8b61, 0xf131, 0x148a, 0x3fdb, 0xf2d0, 0x16c4, 0xc524, 0xdaa7, 0x4428, 0x10b3, 0xece1, 0xd379,
    0xea3b, 0x086d, 0x56be, 0x10db, 0xbbdd, 0xe5cc, 0x70a3, 0x1216, 0x66fe, 0x1663, 0x1ef7, 0x0d6f, 0x9c0b, 0xef88, 0xbfb1, 0x4bf8,
    0x17f1, 0x61c0, 0xb7fe, 0xd110, 0x1555, 0x3363, 0xfe24, 0x443a, 0xa081, 0x42ff, 0xf7ff, 0x63ff, 0x5167, 0xac28, 0x3a91, 0xed88,
    0xfff7, 0xff63, 0x4887, 0x9fc4, 0x366b, 0x3f93, 0xc701, 0x3fed, 0x0c31, 0xe79a, 0x52d8, 0x7e1c, 0x21ad, 0xde07, 0xdf2b, 0x1813,
    0xb61a, 0xd8b5, 0x6d58, 0x059e, 0x42d7, 0xd25c, 0x44bf, 0x1f09, 0x17c4, 0xabe1, 0x48e8, 0x9561, 0x615d, 0x0ccc, 0x1ca6, 0x6dd9,
    0x3f80, 0xde6b, 0x4e04, 0xd62a, 0x70c4, 0x3640, 0x6a96, 0x087f, 0x2356, 0x09af, 0xe0a4, 0x0b33, 0x7b17, 0x190d, 0xe96b, 0x71ff,
    0x4ff2, 0x77fc, 0xe110, 0x9ffd, 0x3ef0, 0x690d, 0xe6b9, 0x0c43, 0xbcd8, 0x35fc, 0xde05, 0xf100, 0x051e, 0xc785, 0x245c, 0x986d,
    0x0b56, 0x37c2, 0x85af, 0x7485, 0x5c24, 0x6d98, 0x0ada, 0x9fd6, 0x0481, 0xeacd, 0x3aff, 0xeb5c, 0xffad, 0x4434, 0x1816, 0x512d,
    0x6864, 0x8b0f, 0xf5b2, 0x2520, 0x0b9b, 0x5588, 0xc3e8, 0x3aa3, 0x935c, 0x084f, 0x0e5a, 0x52cc, 0x213c, 0x4d72, 0x1090, 0x76bf,
    0x30fa, 0xcea8, 0x3bd3, 0x4cdd, 0x78b7, 0x3d57, 0xef4c, 0x3375, 0xd9df, 0x8284, 0xa53d, 0xa423, 0x4b31, 0x3968, 0x4c86, 0x70ae,
    0xe901, 0xfab2, 0x19bf, 0xb6b9, 0x3614, 0xb040, 0x53cd, 0x70d6, 0x931a, 0xd5b4, 0x0c77, 0x4a37, 0x102c, 0x850d, 0x6161, 0x6868,
    0x71b7, 0xa675, 0x6b1c, 0xd09e, 0xc8c8, 0xd4d4, 0x620c, 0x7211, 0x60ff, 0xd1e8, 0xcf27, 0x1bd9, 0x598f, 0x1291, 0x3188, 0x45c8,
    0xfc39, 0x0335, 0x3eca, 0x7ef2, 0xdf57, 0xb945, 0x93e4, 0x6d6a, 0x6587, 0x0f26, 0xe39d, 0xc6f9, 0x3f51, 0x9a36, 0x8419, 0x765e,
    0x9848, 0x1ae9, 0x259d, 0x1fad, 0xde4c, 0xcdc2, 0x3940, 0xabf3, 0xef09, 0x0d46, 0x7523, 0xfc06, 0xeb5e, 0x9623, 0xf54a, 0x4f84,
    0x3103, 0xfc42, 0x040d, 0x17fa, 0x9fc5, 0x4dfd, 0x9ae7, 0x310c, 0x4a1b, 0xd097, 0x5ecd, 0x77ec, 0x44b5, 0x6058, 0xc6ac, 0xc1bb,
    0x06f9, 0x8c85, 0xa1bf, 0x5e20, 0xacc6, 0xbbc1, 0xfbc0, 0xa435, 0x25aa, 0x02c3, 0xbb8a, 0x7550, 0x10d1, 0xfeb7, 0xd899, 0x935e,
    0x4b0c, 0xe8dd, 0x5e14, 0x57fb, 0x323c, 0xd6a8, 0x2cd7, 0xc3fa, 0xe264, 0x33c0, 0x8bf5, 0x007d, 0x1022, 0xacf0, 0xb2b5, 0xa2fa,
    0xfebe, 0xd970, 0xd478, 0x9a8c, 0xb731, 0xd494, 0x2e7e, 0x4d84, 0x8509, 0xffca, 0x07d9, 0xb162, 0xeac3, 0x7c5b, 0x419a, 0x0c24,
    0x6436, 0xbdee, 0xd898, 0xa882, 0xcc5a, 0x816b, 0xfb1f, 0xffbf, 0x297a, 0x58ee, 0x414a, 0x5ff3, 0xd46e, 0xf91d, 0x4a4a, 0x5f5f,
    0x9ade, 0xb116, 0x5034, 0x26fd, 0x3030, 0xdcdc, 0x3559, 0x9fe8, 0xeb69, 0x8c94, 0x4b46, 0x9666, 0xde0d, 0x6635, 0x55d7, 0x9f8e,
    0xffe6, 0x105d, 0xfae9, 0xb2d3, 0x27cd, 0xc294, 0x6a47, 0xde17, 0x9e53, 0x51d1, 0xa9f4, 0x6c2c, 0x9108, 0xca7b, 0x4d0d, 0x4796,
    0x1542, 0x92f4, 0x3f6a, 0x3f27, 0xf1dc, 0x2e2b, 0x50ea, 0x780e, 0x0143, 0x45ee, 0xfdb7, 0x81a8, 0xc847, 0xf856, 0xb1ce, 0x3e03,
    0x6f7b, 0x05fc, 0xd670, 0xcd53, 0x0474, 0x96ec, 0xd4b5, 0x6599, 0xdedb, 0x7f01, 0x8686, 0x1616, 0xa5fa, 0x317d, 0x00cd, 0x38b1,
    0x4d4d, 0x8c8c, 0xb4a8, 0xa4ba, 0x3950, 0xd647, 0xc232, 0x7f04, 0x9112, 0x8f59, 0xea92, 0xa2d2, 0x6b8c, 0x7849, 0x26e3, 0x3258,
    0x4df4, 0x645e, 0x1983, 0xa8e3, 0x7f96, 0xf99d, 0xe2dd, 0xf55c, 0x8a4d, 0x572a, 0x3a73, 0x77bf, 0x35c9, 0x84f0, 0x75a1, 0x0bdd,
    0x8256, 0x5744, 0x5bf0, 0x7ca1, 0x39c0, 0x8a13, 0xbd33, 0xcdd4, 0x87ac, 0xaf6d, 0x5192, 0xc158, 0xdafd, 0x4240, 0x8286, 0x6cc7,
    0x27f1, 0xd221, 0x3444, 0xadff, 0x49bf, 0x140d, 0xaa20, 0x3626, 0x9b31, 0x5321, 0xa316, 0x9f7b, 0x02b2, 0xc851, 0x82e6, 0x3e67,
    0x16a3, 0x7b9f, 0xdcb4, 0xca91, 0xf9a9, 0x2ca0, 0x76e1, 0x687a, 0x430c, 0xb9e6, 0x6820, 0xd0bf, 0x7ada, 0x2325, 0x8a5e, 0x963b,
    0xe2c5, 0xa5b1, 0x1cf2, 0x40a0, 0xf528, 0x1d81, 0x3d2c, 0x6b2e, 0xd961, 0x83c9, 0x7bc2, 0x8351, 0x7658, 0x60f2, 0x0695, 0x69aa,
    0x9fbc, 0x8fb2, 0x47eb, 0x4967, 0x1028, 0x873c, 0xd259, 0xd1fa, 0x1a54, 0xa6a9, 0x7b70, 0xdb12, 0x3088, 0x7a42, 0x69e6, 0x7908,
    0xbc37, 0xef86, 0x2ab3, 0x410c, 0x9f10, 0x21be, 0x4363, 0xfff8, 0xd5b0, 0xaec5, 0xd980, 0xafed, 0x37b3, 0xfd53, 0x8968, 0xd7f7,
    0xffab, 0xd734, 0xe191, 0x46b5, 0xf5d0, 0xf37c, 0xc2c3, 0x6c3e, 0x63a3, 0x9dec, 0xc07f, 0x9eeb, 0x7464, 0xbdef, 0x6396, 0xc908,
    0x7f8a, 0x2fd8, 0xe1d2, 0x3e01, 0xb714, 0xb782, 0xb9af, 0x50fc, 0x12bd, 0x2f24, 0x894e, 0x1cd4, 0x7e45, 0xa9e3, 0x0d1c, 0x95f7,
    0x4a12, 0xdb07, 0x8a5c, 0x8457, 0x99ad, 0xa77f, 0x9682, 0xf868, 0x2bc2, 0x2e45, 0xe50e, 0x6519, 0xd3af, 0x098b, 0xcc15, 0x2781,
    0x1bfe, 0xff77, 0x16cc, 0xe5aa, 0xb33a, 0x4464, 0x3820, 0xd480, 0xc910, 0x84df, 0xf64f, 0x6b51, 0x2646, 0xfca7, 0x2b76, 0x97bd,
    0x4376, 0x9586, 0x3c4b, 0x6ad5, 0x63a1, 0x568b, 0x5af0, 0xffd1, 0xb135, 0x4e8e, 0xb125, 0xbc1f, 0x86e6, 0x483a, 0x0242, 0xcd93,
    0xd08e, 0xbe4d, 0xc17d, 0x9afa, 0x35d3, 0xd4f6, 0xbfdc, 0x4b58, 0x0fb6, 0x2494, 0x84ca, 0x647c, 0xaa6d, 0xbf48, 0x3d13, 0x4ac9,
    0x086c, 0xfebd, 0x8456, 0x7811, 0xebad, 0xa22c, 0x98ab, 0xb128, 0x45ca, 0xd6de, 0xb543, 0x5fa9, 0x7ecb, 0xd751, 0xbeb0, 0xa42f,
    0xcf02, 0xac36, 0xec0a, 0x55ae, 0xc793, 0x02e4, 0x90b0, 0x851b, 0x318b, 0x7f33, 0x252f, 0xc85f, 0x5549, 0xf92b, 0x6066, 0xeb0a,
    0x5ec4, 0x182c, 0x2b7c, 0x23e4, 0x019e, 0x2713, 0x9e5e, 0x9a9e, 0xb7e4, 0xfcb5, 0xfd61, 0x6b96, 0xf939, 0xfb51, 0xadc3, 0xb583,
    0x96ae, 0xe023, 0x114c, 0x6e55, 0xa4b7, 0x4f98, 0x0446, 0xb2c7, 0x4631, 0x6c0d, 0x22da, 0xf357, 0xdadb, 0x48b9, 0x3b1e, 0x684a,
    0x951a, 0x8e9b, 0xf32c, 0x708b, 0xfa75, 0x6131, 0x654f, 0xd6ba, 0x9c17, 0x4466, 0x8545, 0x8137, 0x3551, 0xd19f, 0xa8cf, 0xad6d,
    0x77e3, 0x27b3, 0x670f, 0x9bce, 0x9316, 0x1737, 0xad9a, 0xacd8, 0x9050, 0xfb3b, 0xb5ed, 0x90f5, 0xb7d7, 0xb575, 0xa604, 0x2ea4,
    0xdd6b, 0x72c4, 0x0611, 0x4f48, 0xe409, 0x2760, 0xd7d5, 0x9370, 0x4fa5, 0x6163, 0x945a, 0xd8b2, 0xfe41, 0x21a5, 0x7d97, 0x9d52,
    0xb960, 0x19da, 0x52e7, 0x0539, 0x09ca, 0xdf46, 0x1231, 0x041f, 0x2340, 0x7b8b, 0xa4d5, 0x39db, 0xbe09, 0x6a62, 0xc1d6, 0xe27f,
    0x272e, 0xf347, 0xd8cd, 0xac81, 0xaee0, 0x0d37, 0xd49b, 0xd0a9, 0x8aa6, 0xeaa2, 0xd539, 0xab2c, 0xac66, 0x429c, 0x72a7, 0x9963,
    0x41f4, 0xf28f, 0x7de9, 0x79ba, 0xfc9f, 0x6fd6, 0xff64, 0x16b5, 0xfe95, 0x0050, 0x83f5, 0x48fd, 0xbe99, 0x9e50, 0x6cc1, 0x5aae,
    0x0de9, 0xe4f7, 0xf177, 0xb3c8, 0x135b, 0xe8e4, 0x4281, 0xd0d1, 0xf4b8, 0x13ea, 0x434c, 0x960f, 0x6437, 0x6958, 0x0307, 0x103c,
    0x604f, 0xf624, 0x91e3, 0x6c72, 0x3784, 0x7b01, 0xa398, 0xaa32, 0x782b, 0x714b, 0x30a9, 0xf315, 0xa839, 0x9d12, 0xc518, 0x35b0,
    0x7662, 0xac4b, 0x7812, 0xc15c, 0x2dc2, 0xb3cc, 0xd484, 0xc863, 0xc45d, 0x14a8, 0x9625, 0x7027, 0x2a7b, 0xb5d6, 0xd7eb, 0xe508,
    0x1902, 0xafc5, 0xbeb8, 0xcb17, 0x0e25, 0xc88a, 0xd6c6, 0x309a, 0xa089, 0x3001, 0x2c39, 0xd1b2, 0x9859, 0x2705, 0x770f, 0x0671,
    0x0f01, 0x2f65, 0x919a, 0xc207, 0x5d1b, 0xc993, 0x2061, 0xd20c, 0x9948, 0x5921, 0x98ad, 0x28c4, 0x0c73, 0x458e, 0xe33a, 0x34d0,
    0x8bf4, 0xdaa6, 0x782a, 0x2f23, 0xa950, 0x3092, 0xf012, 0x7bd4, 0xb38f, 0x397b, 0x232b, 0xc0fa, 0x25e0, 0xa8f7, 0x426a, 0x31e4,
    0x44ac, 0x198e, 0x3afc, 0x9183, 0x2b42, 0x08bc, 0x027c, 0xa5c3, 0x4253, 0xd8f1, 0x8b12, 0xb98a, 0x5e89, 0x9217, 0x04a7, 0x728c,
    0xc1b2, 0x4a1e, 0x7e15, 0x9ec5, 0x912f, 0xb785, 0x2e67, 0xdeed, 0x8021, 0x606c, 0xea87, 0x5c35, 0x04a4, 0x5eb6, 0x751c, 0x6330,
    0x4a33, 0x9241, 0x2655, 0xf3df, 0x927c, 0x4dad, 0x87a5, 0xcd65, 0xb39c, 0x7e6d, 0x02bc, 0x3f53, 0x97a4, 0xaa10, 0x5d32, 0x1941,
    0x2d3d, 0x7b59, 0x34e7, 0x4399, 0xf4e3, 0xa774, 0x2a74, 0x26f5, 0x8baa, 0x9a2a, 0xaa09, 0xc582, 0x30dc, 0x8a8b, 0xed70, 0x6f21,
    0xede5, 0xe9f0, 0x9d4b, 0xe414, 0xacf7, 0x0dca, 0x75ff, 0xd659, 0x6c90, 0x9044, 0xf4ab, 0x9f4c, 0x826f, 0x989a, 0xbea9, 0xfa31,
    0x06b9, 0x29ae, 0x2142, 0x8598, 0xab11, 0xd784, 0xe792, 0x7fa8, 0x1079, 0xccb0, 0xb354, 0xf843, 0x0120, 0x23d6, 0x0b95, 0x7ae4,
    0xc6a3, 0x64d4, 0x31ef, 0x993b, 0xdc8a, 0xe386, 0x23b5, 0x0bef, 0xf29c, 0x8e8a, 0x3018, 0x3e48, 0xae7f, 0x471f, 0x61f5, 0x2dbe,
    0xeee4, 0xd054, 0x954d, 0xd51e, 0xdf14, 0x6bc6, 0xbecf, 0x5c02, 0x535f, 0xb82f, 0x65e4, 0x4f05, 0x1f19, 0x32a1, 0xd7a8, 0x6d41,
    0xf735, 0x8a1f, 0x1473, 0x5546, 0x89c3, 0x5a58, 0x1b02, 0xaf7f, 0x08cd, 0xa58b, 0x6140, 0x4b5a, 0xcb65, 0x756a, 0x61b1, 0xf61e,
    0xa42c, 0xc702, 0xbf16, 0x6408, 0xdb1b, 0x77c8, 0x966f, 0x77f5, 0x6522, 0x6485, 0x6b9f, 0x90fe, 0xb993, 0xf31e, 0x3e51, 0x5c3e,
    0xf10c, 0x6147, 0x2c5f, 0xfae2, 0x4ac8, 0x4269, 0x0ccb, 0x9107, 0x62b6, 0xa310, 0x552d, 0xffc0, 0xcb90, 0x3ee0, 0x99c4, 0xadf8,
    0x3ae0, 0xfc1b, 0x2798, 0xbec8, 0x0c6b, 0x8344, 0x440e, 0xd7e7, 0x97b7, 0xc3a7, 0x1719, 0xaa16, 0xe6ea, 0x2915, 0x4bb2, 0x3093,
    0x7f1d, 0x68d1, 0x0b16, 0x26a8, 0xe273, 0xebae, 0xf280, 0x21b7, 0xf85d, 0xf94c, 0x0955, 0xa4b0, 0xc43b, 0x5e9a, 0x8dc6, 0xc053,
    0xdfbb, 0x399d, 0x8b45, 0x01bb, 0x4b9a, 0x5ae8, 0xf0de, 0xbe1b, 0xd947, 0xde4f, 0x5472, 0x66f4, 0x77b2, 0x8e8d, 0x4445, 0xec80,
    0xfbb7, 0xc808, 0xab9e, 0x5bbc, 0x2440, 0xf7bb, 0xaacc, 0x0431, 0xe3d1, 0xf42b, 0x2f3b, 0x0cc2, 0x7bae, 0x01ff, 0x6189, 0x1bbd,
    0x6ccd, 0xfd3b, 0x5171, 0x1b86, 0xc11b, 0xd68c, 0xe1e9, 0xd54b, 0xfaae, 0x2c60, 0x389c, 0x85a5, 0x9bb3, 0xb4fc, 0x1526, 0x62be,
    0x8d7a, 0x16d4, 0x3c9a, 0x3895, 0x5929, 0xa267, 0xbff0, 0xf359, 0x6804, 0x716f, 0x6225, 0x70cc, 0xaf31, 0x03d7, 0x479e, 0x5eb3,
    0xdb27, 0xabde, 0xe120, 0xbe0f, 0xc03f, 0x4484, 0x24b4, 0xb7f6, 0xa1fa, 0x0d57, 0x6183, 0xab07, 0xac56, 0xfa67, 0x9b87, 0x48d9,
    0xf9dc, 0x4dcd, 0x9064, 0x8cd2, 0xd074, 0x1a04, 0x897f, 0x23f6, 0x2f85, 0x92fb, 0x3274, 0x9237, 0x1baa, 0x7b21, 0x0070, 0x36a4,
    0xbbb8, 0xdcfc, 0x460e, 0xebf0, 0xe8fd, 0xc833, 0x6cf6, 0x6078, 0x8cac, 0x03eb, 0x21d5, 0x4260, 0x9b7c, 0x1da1, 0x5341, 0x93bb,
    0x1b09, 0x1ab4, 0x6638, 0x12b1, 0x0185, 0x692d, 0x086f, 0x02f6, 0xce3e, 0xe5ec, 0x0dfe, 0x701d, 0x61e0, 0x9cff, 0x171c, 0x0cec,
    0xe5f0, 0xa26b, 0xa050, 0x3474, 0xdd1c, 0xb25f, 0x792e, 0xfa87, 0x6167, 0xf380, 0xafc9, 0x5eba, 0x83cd, 0xd6ac, 0xde6f, 0x396c,
    0xb83f, 0x156d, 0x46cc, 0x8e79, 0x0567, 0xa24b, 0x8547, 0xad7f, 0x9427, 0xa66f, 0xcb7f, 0x172d, 0xe7fa, 0x71f4, 0x3ac4, 0x3490,
    0xb597, 0xd3d2, 0xb6d6, 0x67d4, 0xcf36, 0xee63, 0x2972, 0x115e, 0x5d15, 0x03a0, 0xa36f, 0xe504, 0x7350, 0x253a, 0x63ba, 0x5fc6,
    0xacbd, 0x9e96, 0xc698, 0xa195, 0x292a, 0x8809, 0x2849, 0x6c1f, 0xad25, 0xa030, 0xf4c9, 0x4abf, 0xbc90, 0x4af4, 0xa2cf, 0xdc56,
    0x3fee, 0x2d7d, 0x222b, 0x3894, 0x2b41, 0xa22b, 0x50e9, 0x087e, 0x31cc, 0x1639, 0x1c09, 0xc431, 0xe13d, 0xa8c1, 0x1c15, 0x1dea,
    0xa1b6, 0xc40d, 0xc268, 0x5b1b, 0xb894, 0xd170, 0x4808, 0x5fbb, 0x8ceb, 0xd340, 0xfb20, 0x2c56, 0xcabe, 0x236f, 0x266f, 0xe166,
    0x8dfa, 0xa04c, 0x510f, 0xa145, 0xbcaf, 0xe068, 0xcb3a, 0xbfee, 0x85ac, 0x8527, 0xcc4e, 0x8975, 0x7fb7, 0xf7a6, 0xa951, 0xb8e9,
    0x4594, 0x75bd, 0x6b68, 0xaa45, 0xa22d, 0x7f35, 0xad7d, 0xbf5a, 0xd998, 0x40bf, 0xda9a, 0x346a, 0x19bb, 0x9035, 0xd607, 0x5919,
    0x5e17, 0xd0e9, 0x016b, 0xb02f, 0xd7fa, 0x5478, 0x7c42, 0x86f8, 0xe9a9, 0xe9e5, 0x4851, 0xfad9, 0xf7be, 0xd191, 0xff00, 0x1112,
    0x887e, 0xc4be, 0xbf92, 0x9554, 0x90da, 0xc001, 0x0d8d, 0xffe3, 0xcf83, 0x0419, 0x9290, 0x902b, 0x2423, 0x8e59, 0x6acd, 0x3cd8,
    0xb099, 0xa060, 0xb091, 0xab41, 0xf9b9, 0x7177, 0x7624, 0xf661, 0xfae3, 0xe1f4, 0xb2a0, 0x4b65, 0xdc34, 0x82bb, 0x1a2a, 0xec8f,
    0x7fd1, 0xb81f, 0x222c, 0xb5d2, 0xc6b4, 0xaab2, 0x5b07, 0xff89, 0x1d52, 0x2604, 0xc29b, 0x3e09, 0xeb95, 0xa52e, 0xc465, 0xc630,
    0xa0f5, 0xc6ec, 0xc0ae, 0x5ae5, 0x6b0d, 0x706c, 0xb55a, 0x12cf, 0x0ffc, 0xd552, 0xfd88, 0x5fe2, 0x7943, 0x9c09, 0xa0d6, 0x7058,
    0x15ab, 0x99fe, 0x2c70, 0xca42, 0xb7e6, 0xb896, 0x0fd7, 0x3e13, 0x7e4b, 0xcb5f, 0x209e, 0x87c8, 0x4432, 0x37e1, 0x96f8, 0x2290,
    0xb519, 0xb7bc, 0x970e, 0x09f0, 0xf46d, 0x9ca0, 0x5bd2, 0xcc27, 0x09a9, 0xc790, 0x286e, 0xfe4e, 0xa69e, 0xcd47, 0x53b9, 0xb1cc,
    0x06f0, 0x28f2, 0x22f0, 0xad08, 0x55fa, 0xa64f, 0x7bea, 0xa791, 0x9780, 0xa3de, 0xfed4, 0xf103, 0x7277, 0x2a68, 0x9639, 0x2a77,
    0x3fa4, 0xe7da, 0x4b6f, 0x9f65, 0x64c5, 0xf5e0, 0xf791, 0x9f22, 0x2e89, 0x9c15, 0xea53, 0x753d, 0xa90b, 0x8129, 0x7cbd, 0xf2ef,
    0x077c, 0x0743, 0xbf79, 0xb0e5, 0xed16, 0x1b47, 0x0279, 0xd809, 0x9dea, 0x84ad, 0x433c, 0x51d8, 0x17ae, 0x31c1, 0xcf52, 0x8e26,
    0x8c7c, 0xc9f2, 0xc502, 0x5db3, 0x32e2, 0x1863, 0x5a0a, 0xe1a3, 0x52bf, 0x876a, 0xde92, 0x613e, 0x57de, 0x3470, 0xbc43, 0xa5e9,
    0xb6b5, 0x3ea3, 0xd7af, 0x11ca, 0xe440, 0x7d7e, 0x66b6, 0x9dfe, 0x070e, 0x78a3, 0x28c2, 0x2843, 0xa78e, 0xf915, 0xaa84, 0x5852,
    0xcbea, 0x07a4, 0x9387, 0x366c, 0x2858, 0x0ad7, 0xf5bd, 0x2d4f, 0xa3d2, 0xd9ef, 0x9f0a, 0xcf76, 0x53c9, 0x22cc, 0x78f7, 0x65f7,
    0x5984, 0x792a, 0x2059, 0x34b1, 0xba33, 0x9e76, 0xecb9, 0xc594, 0x9b94, 0x816c, 0x9f3c, 0x646f, 0x4f2d, 0xbdf5, 0xa4e8, 0xf6e7,
    0xfeae, 0xcdf2, 0xf9f8, 0xe681, 0x2a46, 0xdb84, 0x59d7, 0x7611, 0x495b, 0xbd02, 0xfd21, 0x3ed7, 0x64fb, 0x7bd5, 0xd684, 0xdefc,
    0x01fe, 0x2422, 0x3642, 0x60c8, 0xe799, 0xeb68, 0xbc1e, 0x98ac, 0x23a9, 0xc678, 0x2d60, 0x05f6, 0xe3b0, 0xc319, 0xfe58, 0x9178,
    0x777a, 0x3702, 0xff35, 0x14a4, 0x9c86, 0x0313, 0xb604, 0x04b6, 0x6614, 0x5a1b, 0xadaf, 0xad48, 0x0800, 0x6bff, 0x40e0, 0xec87,
    0xf3c2, 0x375d, 0x72a9, 0x222e, 0x43fe, 0x8088, 0x4bfe, 0xdeff, 0x116b, 0xade9, 0x7754, 0x994b, 0x2cb4, 0xb42c, 0x78d5, 0x3643,
    0x3f5b, 0x290a, 0x8cde, 0x4a8e, 0x0221, 0xcf0a, 0x350f, 0x02ce, 0x1c0f, 0xdea5, 0x84f8, 0xf10d, 0x5c4d, 0x820e, 0x256c, 0xef54,
    0x10c8, 0x2d7e, 0x1cc7, 0x86de, 0xd90b, 0xdd50, 0xd57d, 0x9253, 0xa382, 0x43bd, 0x27ca, 0xcb87, 0x74c0, 0x6f5c, 0xe7e2, 0xd844,
    0x9355, 0x89fe, 0x7e79, 0x797e, 0xceff, 0x4087, 0x582d, 0x08df, 0x24d0, 0xa2af, 0x6a79, 0xadef, 0x7377, 0xdacd, 0xc0bf, 0xc459,
    0xe581, 0x7d1a, 0x768a, 0x42d9, 0x5fec, 0xb35b, 0x7729, 0x5558, 0x7bbb, 0xbb7b, 0xed46, 0xdf91, 0x03c4, 0x1778, 0x575c, 0x5999,
    0xf34a, 0x8da7, 0xef3b, 0x9a6e, 0x7add, 0x4ad4, 0x88e5, 0xd7ba, 0x4263, 0x0a3d, 0x9e31, 0xea48, 0xb46a, 0x257c, 0x399a, 0xb725,
    0x7e3e, 0xa079, 0xddc1, 0xd59c, 0x869f, 0x25e6, 0x1248, 0x6bd8, 0x81bc, 0x74ec, 0x4e36, 0x95c4, 0xf924, 0x5a9b, 0x3b91, 0xe4eb,
    0x70d2, 0x87d2, 0xdd9d, 0xbbeb, 0xdc95, 0x78c5, 0xde5a, 0xdc9c, 0x3508, 0x39ce, 0x1036, 0xe251, 0xf1ea, 0x683c, 0x2745, 0xb73f,
    0xd890, 0xad05, 0x89d1, 0x1d2f, 0x2b50, 0xcd2a, 0xc93a, 0x2dd0, 0xebbb, 0x9ddd, 0xb157, 0x99bb, 0x141e, 0xfa83, 0xaeee, 0xea0e,
    0xb512, 0xb75e, 0x2eda, 0xb18d, 0xb52f, 0x9dba, 0x492f, 0x2154, 0xd919, 0xe3ee, 0x7741, 0xe7a7, 0x2d76, 0x86ad, 0x01c2, 0x0f69,
    0x5937, 0xd289, 0xab43, 0xe281, 0x01b4, 0x0193, 0x2938, 0xccc2, 0xb6cf, 0x5608, 0xe44e, 0x3af9, 0xc6c2, 0x4a9f, 0x4a50, 0xa23b,
    0x4862, 0x7330, 0x3f94, 0x943f, 0xc575, 0x9599, 0x21ab, 0x0dfb, 0x53e2, 0xc1ff, 0xe040, 0x87ec, 0x9aaa, 0x0438, 0x52ff, 0x321d,
    0xfe43, 0x8880, 0x6e6c, 0x0a1c, 0x2f78, 0x18df, 0x204d, 0x9621, 0xcc5b, 0x5bcc, 0xe0e9, 0xa9ba, 0x817b, 0xe211, 0xfcef, 0x7408,
    0x7c41, 0xbe1a, 0xd010, 0x0312, 0xd897, 0xd10f, 0x1901, 0xff76, 0xe67b, 0x44f2, 0x5b7a, 0xfb2c, 0xf013, 0x5fa6, 0x4648, 0xb31c,
    0x25a1, 0xbfb5, 0xa9f8, 0xe2e1, 0x2146, 0x6cc5, 0xb129, 0x9e62, 0x768e, 0x78d9, 0xe044, 0x62ad, 0x9712, 0x1a2e, 0x0959, 0x284d,
    0xd9a3, 0x3770, 0x4fa3, 0x3cb0, 0xd011, 0xb25b, 0x9098, 0x2a8d, 0x54f8, 0xb67b, 0x33ba, 0x769e, 0x482a, 0x4f8a, 0x0d2c, 0xdb9a,
    0xf778, 0xf765, 0x6069, 0xd6dc, 0xb298, 0x973d, 0xa8e6, 0xc875, 0xb03c, 0xa34f, 0x056a, 0x59a5, 0x3baf, 0xba97, 0x60c9, 0x8c9b,
    0x02ba, 0x4b3b, 0xc74e, 0xc81b, 0xdc07, 0x7219, 0x836d, 0x30bb, 0x4e86, 0x46f2, 0x6148, 0xa307, 0x13b2, 0x4ef8, 0x8ec2, 0x19e2,
    0x3fef, 0x7025, 0xc4d1, 0xea59, 0xb521, 0x0380, 0x61fc, 0xf636, 0xe9a6, 0xbef3, 0xf5f8, 0xdad5, 0xa1cb, 0x941a, 0xf079, 0x8320,
    0xca9c, 0xacb1, 0x40eb, 0x7ced, 0xf16c, 0x1425, 0xb467, 0xa09b, 0xda55, 0xdd18, 0x56b8, 0x42c1, 0x12f2, 0x96a0, 0x90d8, 0x05ad,
    0xbb81, 0xcd1e, 0x1974, 0x9d27, 0x3610, 0x51e2, 0xf071, 0xcb29, 0x071b, 0xd275, 0xfccc, 0x5524, 0x9ba0, 0x67b4, 0x0528, 0x7d7c,
    0xd450, 0xa531, 0xce5c, 0xdbbd, 0x6e7b, 0xf3c5, 0x2b93, 0xe34c, 0x8f0c, 0xaa35, 0xac20, 0x395d, 0x0cc9, 0x4c4f, 0x30e2, 0xe3c4,
    0xd0eb, 0xb577, 0x0903, 0x6690, 0xb750, 0x91cd, 0x50cb, 0xc9a5, 0x9d37, 0x1ece, 0xe30a, 0xd653, 0x0976, 0x02f4, 0x20e4, 0xc0ed,
    0x7547, 0x94b9, 0x80b2, 0xa7e6, 0x5711, 0xee43, 0x62a9, 0xa962, 0xe651, 0x53a3, 0x88ad, 0xffb7, 0x7a5e, 0x6e47, 0x796a, 0xefad,
    0x88af, 0xfe26, 0xe014, 0x3255, 0x81e5, 0x1a7d, 0xf308, 0x31f6, 0x9a0b, 0x9cf9, 0x77a7, 0x7023, 0x21f1, 0xf121, 0xc7aa, 0xe737,
    0xedb9, 0x17cf, 0xeb21, 0xdb6b, 0xf40e, 0x00d3, 0x319c, 0x3b0e, 0x7688, 0x2952, 0xad35, 0x7a4f, 0x37ed, 0x665a, 0x72e8, 0x06a5,
    0x2b01, 0x2ef2, 0xb3ea, 0xc9e1, 0x2ecc, 0xdb60, 0x218a, 0xd903, 0x38ea, 0x60c6, 0xb703, 0x9083, 0x6117, 0x9d75, 0xdce3, 0xda3d,
    0x4fcb, 0xbb39, 0xd001, 0x8aae, 0xcfb3, 0xcbdf, 0xd526, 0xa107, 0x0e27, 0x6169, 0x5889, 0x1c33, 0x2ca8, 0x52d9, 0xf0a6, 0x4f82,
    0xff4e, 0x5b33, 0x05b5, 0xa35e, 0x2818, 0x6c26, 0xee07, 0x5ff4, 0xa3e6, 0x4f53, 0x359f, 0xff0b, 0x7163, 0x4616, 0xdf29, 0x81b9,
    0x455b, 0xee0f, 0xe89a, 0x397c, 0xc1d0, 0x01df, 0xb9f6, 0x0fe9, 0xaae9, 0x54b7, 0xb1c1, 0x35ac, 0xc2b7, 0x423e, 0x17db, 0x0ec1,
    0xe25b, 0x408a, 0x2cf4, 0xe963, 0x9a60, 0x09ac, 0xb318, 0x37f3, 0xf2df, 0x45cb, 0x6bf2, 0x97ae, 0x10cf, 0x1476, 0xfa94, 0x5d4f,
    0xae60, 0x093c, 0xfc0c, 0x418d, 0xb8d1, 0x0a78, 0x32dc, 0xa6b0, 0xbd9c, 0xc7d9, 0x1613, 0x5fa7, 0xd1d8, 0x19cc, 0xe53b, 0x3730,
    0xa684, 0xe3b1, 0xf1d4, 0x22bf, 0x7398, 0x05d3, 0xe982, 0xcc39, 0xcfde, 0xba6f, 0x9458, 0x55cc, 0x3b78, 0xc33c, 0xc127, 0x5378,
    0x33b7, 0xbe81, 0x3144, 0x207b, 0x71b3, 0x99c5, 0x75e6, 0xfee6, 0x3e69, 0x14a6, 0x3657, 0xc39e, 0xfd72, 0x04e6, 0x04ae, 0xfde7,
    0x127e, 0x6e8b, 0x882c, 0xc391, 0xf33c, 0x6d1d, 0x3c3b, 0x2904, 0xb39a, 0xb83b, 0x8814, 0xd45f, 0x7cc3, 0x0ca2, 0x534e, 0x1deb,
    0x580a, 0xdac0, 0x322d, 0x41ce, 0xe609, 0xb22f, 0xdc50, 0x9dfc, 0x8c44, 0x07c1, 0xcf94, 0xdf85, 0x2a2c, 0x09bc, 0xd29d, 0x8fd3,
    0x8bec, 0x8279, 0xa710, 0x19ab, 0xa6fa, 0xc7e8, 0x0d8b, 0xb0f7, 0x6a0c, 0x67e0, 0xe7b1, 0x1710, 0x8cbf, 0x74c7, 0x533e, 0x177e,
    0xbace, 0x8bb0, 0x9b47, 0xe949, 0x57a0, 0x692b, 0x489e, 0x7ccf, 0xa671, 0xc995, 0x3c61, 0x72b8, 0x5bb4, 0x1c6d, 0x1957, 0x8f1f,
    0x384b, 0xcc92, 0xc6d8, 0x6d17, 0x4ac6, 0x1569, 0xbfcb, 0xf5f2, 0x7cf8, 0xab7e, 0x763a, 0xde40, 0xab89, 0xd041, 0x4276, 0x09df,
    0x0074, 0xaba2, 0x50ed, 0xea57, 0x30e6, 0xc752, 0xbc22, 0xe452, 0x72ab, 0x8a60, 0xf016, 0xaa0d, 0x82ea, 0x0411, 0xc705, 0x3b03,
    0xc12b, 0xa714, 0xe012, 0xf67d, 0x0cf2, 0x3f7a, 0xf042, 0x5864, 0x936f, 0x23b4, 0xd4d3, 0xf9a8, 0x1d2e, 0xe013, 0x156c, 0x077b,
    0xd93c, 0x2420, 0xed9f, 0x450a, 0x5a52, 0x11b6, 0x8743, 0xc514, 0x682f, 0x8379, 0x868c, 0x8bbd, 0x499c, 0x8adf, 0x5e38, 0x8e40,
    0xe57f, 0x84c2, 0x9ce0, 0x2c11, 0x88d7, 0x5400, 0xbdb1, 0x877c, 0x69d9, 0x74fd, 0x4644, 0x33ab, 0x88f9, 0x385a, 0xaf3e, 0x6986,
    0x8d61, 0x6890, 0xe008, 0x76c7, 0x15bc, 0xa5b8, 0x39c8, 0x45a6, 0x3cfb, 0xfcbd, 0xf679, 0x7bf9, 0x7e1d, 0xc1c8, 0xf8a1, 0x5f73,
    0x9833, 0xb1a3, 0x9df2, 0x981b, 0x54f0, 0x465e, 0x414b, 0x347c, 0x72f0, 0x261a, 0x0c14, 0x1336, 0x01dc, 0x019b, 0x36d5, 0xa45f,
    0xace7, 0x92b2, 0xb390, 0x564b, 0x0f45, 0x9693, 0xfda6, 0xcb4c, 0x0b2b, 0x001e, 0x60f4, 0x290c, 0xf019, 0x8e75, 0x6fac, 0xe4da,
    0xd09a, 0xdf9b, 0x4234, 0x8b71, 0xb717, 0x4c79, 0x6b78, 0xf7b8, 0xd6df, 0x66d5, 0x012a, 0x8641, 0x47a1, 0x4c68, 0xab4e, 0x5ca3,
    0x1d8d, 0x9cc1, 0x422f, 0x9c46, 0x5278, 0x5ac8, 0x4c63, 0xcad0, 0xcc24, 0x92ec, 0xf014, 0xa371, 0x6e3a, 0x6a54, 0x5646, 0xf581,
    0xc31a, 0x20d1, 0xf89c, 0xbaeb, 0xef2b, 0x381a, 0x688b, 0x5fcd, 0x85e8, 0x0d75, 0x982e, 0xc39c, 0xf53d, 0xc8d3, 0xa45a, 0xb686,
    0x341d, 0x0681, 0xf00f, 0x1121, 0xadf9, 0xae25, 0x5ac3, 0x1c1b, 0x523b, 0xf0be, 0xef26, 0x1131, 0x6fa4, 0x70fb, 0xc397, 0xae89,
    0x1019, 0x18a6, 0x0012, 0x623d, 0xb45c, 0xff2d, 0x0017, 0x2d8f, 0x0da9, 0x001c, 0x5236, 0xe6e1, 0x08a4, 0x25be, 0x1c16, 0xa835,
    0xa2f1, 0x7792, 0xe895, 0x2179, 0xb432, 0x18d3, 0x4239, 0xfaf5, 0x523d, 0x6b7d, 0x10ca, 0x308a, 0xe0bc, 0x2332, 0xe95e, 0x1e49,
    0x1f23, 0x7cb2, 0xdf24, 0x1fd8, 0xa86a, 0x4588, 0x5b2e, 0xab53, 0x012f, 0xbd47, 0x4fc6, 0x95ce, 0xe10d, 0xc05e, 0x4f7d, 0x34f2,
    0x0f75, 0xa0c0, 0x9453, 0xe4c5, 0x60f9, 0x34c4, 0x05ce, 0xc477, 0x0929, 0xb902, 0xb8cc, 0x6fb1, 0x49d8, 0xec60, 0x5fa2, 0x848f,
    0x9e87, 0x02a2, 0x75e1, 0x9d0e, 0x0a2f, 0xfdab, 0x14a1, 0xaac4, 0xf8e1, 0xa49c, 0xb395, 0x0a69, 0xa180, 0xf722, 0x28ff, 0x1f44,
    0x987d, 0x891d, 0xe00d, 0xe451, 0x0634, 0xcb6f, 0xe00e, 0xd80c, 0x011f, 0xb574, 0x82e5, 0x6867, 0xe650, 0x39cd, 0xea52, 0x5eb9,
    0xb2ac, 0xe754, 0x5e33, 0xf8a6, 0x1f66, 0x4762, 0x241b, 0x1124, 0x1310, 0x5452, 0xe57a, 0x4ba9, 0xf67e, 0x7dd3, 0x6981, 0x0228,
    0x0c19, 0x46c8, 0x3c5c, 0x153f, 0xce18, 0x871d, 0x6926, 0xbfa4, 0x3537, 0x73e7, 0x4ac1, 0xa5c5, 0xbb04, 0x7a01, 0xde3b, 0x36da,
    0xb3db, 0x4150, 0x0d86, 0x1eac, 0x9e23, 0xde2f, 0x67db, 0x042b, 0xbaaf, 0x724a, 0x8c3f, 0xdec6, 0x6b18, 0xdf6c, 0x9df7, 0x374d,
    0x720d, 0x5c53, 0xd006, 0x4c06, 0x811c, 0x70bc, 0x4f92, 0xb5a9, 0x66c5, 0x6cd5, 0x7916, 0x2efe, 0x3e11, 0xd52b, 0x5009, 0x0c32,
    0x5e0b, 0xfa3f, 0xf62c, 0xf0ab, 0x729a, 0x58ef, 0x7d5f, 0xe516, 0xa43d, 0x0807, 0xc805, 0x278f, 0x588e, 0xad7b, 0x9971, 0x62df,
    0x35a4, 0xc0fb, 0xda4b, 0x852a, 0x832e, 0xf3a4, 0x4ed1, 0x285b, 0xd852, 0x1c7e, 0x29c6, 0x9186, 0x7b23, 0xe4f9, 0xa249, 0xdf2e,
    0x5ec1, 0xee0c, 0xf117, 0xc061, 0x95b6, 0x0cfa, 0xdc64, 0x4b06, 0x4bda, 0x2a85, 0x5860, 0xb544, 0xc63e, 0x1e61, 0x05ba, 0x5927,
    0x57f2, 0x92aa, 0xd573, 0x8b77, 0xa728, 0x8bc9, 0x2cf9, 0x83df, 0x0a1a, 0xb31d, 0x444b, 0xbebf, 0xecbb, 0xea94, 0xf8a3, 0x7827,
    0xc961, 0x968d, 0xe677, 0xfe59, 0xc4af, 0xfd1b, 0x15e0, 0xfa99, 0x6bf7, 0x0901, 0xf220, 0x6199, 0xa597, 0x4a7a, 0x298a, 0x870e,
    0x1df9, 0x6ed4, 0x1414, 0x5d5d, 0xb1c6, 0x09ed, 0x6994, 0xcb91, 0xe47f, 0x1f52, 0x375b, 0x17e0, 0xa843, 0x9bfc, 0x6e1b, 0x5cb1,
    0x4f71, 0xca6b, 0xa2a5, 0x0dbf, 0x81ae, 0xb9fb, 0x0af1, 0x157f, 0x5b5b, 0x5151, 0xe89f, 0x5935, 0x603b, 0xa8c2, 0x31a9, 0x5b4d,
    0x247a, 0xc663, 0xfd7e, 0x7147, 0x512b, 0x75eb, 0xa554, 0xce50, 0xc7bd, 0xc35b, 0x3149, 0xf6a9, 0x41f6, 0xac58, 0x62fd, 0x401f,
    0x421b, 0xfa8e, 0x8e1c, 0x6441, 0x365c, 0xbfaf, 0x7a37, 0x12c3, 0xad52, 0xaf01, 0xf423, 0x04b3, 0x1aa1, 0xba10, 0x44ee, 0xaf93,
    0x1dff, 0x93fc, 0x8df0, 0x82d5, 0x017f, 0xdbde, 0x2323, 0x5353, 0x8819, 0xe217, 0xcf65, 0xa62c, 0x1436, 0x40b0, 0xa1ea, 0xcc08,
    0x4b03, 0xe6b6, 0xaaa8, 0x9b19, 0x5a8d, 0x3332, 0x8831, 0xc845, 0x7781, 0x3c40, 0xcebf, 0x3ad7, 0xa1a1, 0x8585, 0xbaa4, 0xa8b4,
    0x9ee9, 0xe987, 0x3aba, 0x5328, 0xf198, 0x891e, 0xbea3, 0xd086, 0x9a63, 0x1506, 0x63e0, 0xf515, 0x6208, 0x9955, 0xf1d9, 0xee96,
    0x945d, 0x8543, 0xaafd, 0xc54a, 0xd1fd, 0x94d1, 0xd184, 0x36b6, 0xdb2a, 0x0657, 0x26d3, 0x5a71, 0x4c52, 0x7daa, 0xfd08, 0xc12c,
    0xe8d4, 0x9479, 0x591f, 0xe540, 0x91ca, 0xb4dc, 0x62ee, 0xe132, 0x97ea, 0xc5f4, 0x7716, 0xfc12, 0x1618, 0x2d51, 0x8a71, 0xa461,
    0x8378, 0x3536, 0xfc11, 0x08cb, 0x3b83, 0x57b0, 0xf03e, 0x0d69, 0x0334, 0xe2c4, 0x0538, 0x954c, 0xee62, 0x32e1, 0x2153, 0x319b,
    0xc3f1, 0x3949, 0x844c, 0xc70a, 0x3d35, 0xbd3c, 0xfb28, 0xfbc9, 0xb9b8, 0x98b4, 0x90b9, 0xd7de, 0xf01b, 0xd48d, 0xe79b, 0x87ae,
    0x5bdb, 0x66bf, 0x50f2, 0x0d96, 0x297b, 0x0878, 0xf0e7, 0x0cd4, 0x190a, 0x6205, 0xb470, 0xf311, 0x3518, 0xbc27, 0xde63, 0x7732,
    0x232c, 0xf047, 0x4f9b, 0x15e9, 0x7e73, 0xac7a, 0xdede, 0xf0f0, 0xb9ff, 0x3c44, 0xdc59, 0xf04b, 0x5acc, 0x6b81, 0xe017, 0x5b37,
    0xd4d8, 0x0de2, 0xf921, 0x0600, 0x6bca, 0x714f, 0xd755, 0x8e9f, 0x25ea, 0x43c1, 0x5faa, 0x17d3, 0x7070, 0xe9e9, 0x3ee4, 0x1571,
    0x00a8, 0xaf11, 0xa38e, 0x660c, 0x3060, 0x907c, 0xded5, 0xaf43, 0x4649, 0x0563, 0x9495, 0x3d67, 0xf20f, 0x0d29, 0x0a00, 0xd2bf,
    0x2cce, 0x9b8d, 0x9179, 0x37d1, 0xc8c4, 0x94ff, 0x9ce5, 0xf36b, 0x1eb2, 0xbdb6, 0x0f3d, 0x4405, 0x82b0, 0x74e5, 0x076b, 0x875b,
    0xbb4a, 0x1ba3, 0x049a, 0xf455, 0xc49f, 0x8748, 0x3ee1, 0x38ae, 0x565f, 0x203d, 0xeda4, 0xafa0, 0x99d8, 0x5e93, 0x0cee, 0xc15e,
    0x8406, 0x7a80, 0x8e80, 0xdd92, 0x8691, 0xc629, 0xc59f, 0xfd4d, 0xedc8, 0xcf4b, 0x8d07, 0x5e3d, 0xe13e, 0xae38, 0xff42, 0x81a0,
    0xa61f, 0x7ba6, 0xcf1d, 0xb2e2, 0x3c66, 0xa247, 0x747f, 0x6534, 0x1b1d, 0x64ef, 0x6cab, 0x195c, 0x2346, 0x2720, 0x379f, 0x79d5,
    0x4ca1, 0xeae8, 0x9863, 0x722c, 0x401d, 0x48a3, 0x6178, 0x641a, 0xd4d0, 0x6479, 0x9b4c, 0x69c5, 0xbba5, 0x7c76, 0x304b, 0x3f42,
    0xd69f, 0xda0a, 0x3f76, 0x04d1, 0xdddc, 0xb376, 0xc6dd, 0x99d6, 0x2068, 0xbfd0, 0xb057, 0x833b, 0x56d3, 0x4c6a, 0x572c, 0xdb86,
    0x61a4, 0x718a, 0xf127, 0x21d2, 0xa06b, 0xee7e, 0xac71, 0x427b, 0x763f, 0xd104, 0x85c7, 0x1e05, 0x28dd, 0x31dc, 0x5615, 0xca5d,
    0xe7b6, 0x3c5f, 0x00c3, 0x38c9, 0x987e, 0xee99, 0xd509, 0x0c7d, 0xdc7f, 0xfa5a, 0x5b76, 0x8729, 0xcf80, 0xac73, 0x91e5, 0x5343,
    0x1c31, 0x0d90, 0xd0b5, 0x3497, 0x3c77, 0xcb8a, 0x49f3, 0x30a5, 0x32f7, 0xbe9c, 0x0e42, 0x0edc, 0xd4ee, 0x3875, 0xa715, 0x6d32,
    0x0d85, 0x2c10, 0x3232, 0x3535, 0xd26f, 0x4503, 0x7e6a, 0x0b28, 0x7b6f, 0xfc05, 0x08cc, 0xeaa1, 0xaa83, 0xdc55, 0x6116, 0x4a9e,
    0x3233, 0x8d5a, 0x92ea, 0xd2a2, 0xddb3, 0xc2a7, 0xc098, 0xf95e, 0x1a1a, 0x5858, 0x1172, 0x0c62, 0xcf99, 0xa0b9, 0xe58e, 0xa297,
    0xd873, 0xe6ca, 0x2226, 0xdde4, 0xcf6a, 0x1306, 0xa8bc, 0xd9b5, 0xeaef, 0xdf2c, 0xcab9, 0xa1ef, 0x07c9, 0x0603, 0x5b16, 0x528b,
    0x274b, 0x2731, 0xd602, 0x5f60, 0x4ba6, 0x2328, 0x75b8, 0x76b0, 0x62fb, 0x21d8, 0x8df5, 0x5c9b, 0x5c8c, 0xa09e, 0xb8e4, 0xcfd1,
    0x7c52, 0x4152, 0xc296, 0xe3f0, 0xff6b, 0x0008, 0xaaad, 0xa8f8, 0x5a26, 0x8836, 0xf9b4, 0x5e91, 0x6248, 0x3073, 0x4b60, 0x604b,
    0x5ea2, 0x3c14, 0x7c3d, 0xccbc, 0x42cb, 0xcb42, 0xe9e0, 0xbaa9, 0xcec4, 0xf49a, 0xcf7e, 0x1e95, 0xa73b, 0x7ecc, 0xffde, 0xfe4b,
    0xf428, 0x8d09, 0xd7aa, 0x5173, 0x0764, 0x2a22, 0xf910, 0x13c4, 0xa290, 0xb3f5, 0x57d9, 0x6de4, 0x4d21, 0x72b6, 0x5dae, 0x44f3,
    0x857e, 0x7a3c, 0x7cb8, 0xa27c, 0xce2d, 0x23aa, 0xe7d5, 0x30cd, 0x402c, 0x16f9, 0x0777, 0x7356, 0x5887, 0x9206, 0x8e21, 0x48e0,
    0x45c4, 0x552e, 0xfd83, 0xa347, 0x94c5, 0xb9ec, 0x7067, 0xf60a, 0x0eaa, 0x5771, 0xb7e1, 0x54b4, 0x6a05, 0xa559, 0x87c3, 0x73e5,
    0xeaba, 0xd3f1, 0x7be5, 0x6302, 0xe573, 0xc387, 0xa3d9, 0x7037, 0xe6da, 0xfc66, 0x09a4, 0xc432, 0x314e, 0x348c, 0xcc22, 0xc953,
    0x0c1b, 0x583d, 0xb6d1, 0xf1de, 0x4a43, 0x83fc, 0x2535, 0xcc6d, 0x69a3, 0x13f5, 0xbc8b, 0xc04a, 0x63e5, 0xe3fb, 0xa190, 0x5620,
    0x4d6b, 0x93de, 0x3abf, 0x0394, 0xc844, 0xac70, 0x1568, 0x0a2e, 0x95c3, 0xe309, 0xe5eb, 0x977f, 0xad6c, 0xbea8, 0x3967, 0xdafc,
    0x2f1d, 0xd189, 0x326f, 0x90a4, 0x69ff, 0x0e38, 0x19ff, 0x5311, 0x2805, 0x7c7d, 0xc03a, 0xd826, 0x3184, 0x14dc, 0xab02, 0xd146,
    0x26d8, 0x3ac0, 0x6cf1, 0x2514, 0xb34d, 0x79cb, 0x03e6, 0x95ab, 0xc0f3, 0x8619, 0xce39, 0x0835, 0xc925, 0xa761, 0x02f1, 0xfd0d,
    0xbe13, 0xec84, 0x2c5a, 0xd80d, 0x6694, 0x8324, 0x3edb, 0x2158, 0x053d, 0x95fb, 0xb98e, 0xd65d, 0xca95, 0x9362, 0x6403, 0x0c47,
    0x4191, 0x8fd7, 0x4bad, 0x3480, 0xdd96, 0xca61, 0xfc16, 0x285f, 0x4a87, 0xf043, 0x7f18, 0x8dbd, 0x36c6, 0x68bb, 0xc04e, 0x13c8,
    0xafa2, 0xd024, 0x3897, 0xf620, 0xf0d7, 0x62f3, 0xd687, 0xd022, 0x1157, 0x43ee, 0x5924, 0x2459, 0x4cb9, 0x3b84, 0x70c7, 0x74a3,
    0x9c99, 0x999c, 0xaac7, 0x37e7, 0x771b, 0x5a67, 0xf426, 0x4504, 0x3e92, 0xe4ac, 0xd942, 0x8a76, 0x2b3a, 0x3170, 0xbe16, 0x15d2,
    0x0122, 0xdfbd, 0xdd98, 0x1eb4, 0xb4df, 0x6999, 0x6837, 0x2b13, 0x1814, 0xeea1, 0x1419, 0x78fd, 0xfd10, 0x7d89, 0x1d2a, 0x0fc1,
    0xeb98, 0xdd65, 0x4a4b, 0x36c2, 0x3760, 0x68b1, 0xd284, 0x9095, 0xa39b, 0x4bf6, 0xb50d, 0x6e20, 0xdfe2, 0x23fd, 0x0f64, 0x2886,
    0xdcd6, 0x6960, 0x4e31, 0x8c34, 0x436b, 0xc28c, 0x25e1, 0x31ae, 0xe8a4, 0xe7f6, 0x7ad8, 0x0085, 0x5f88, 0x6620, 0xea43, 0x8ffc,
    0x8500, 0xd87a, 0x5828, 0xd70a, 0x598b, 0x702d, 0xa2aa, 0x666c, 0x6770, 0x0af6, 0x7bb6, 0xf854, 0xd752, 0x6596, 0x5553, 0x8700,
    0xe6f0, 0x15e5, 0x363d, 0xf195, 0x6dd1, 0xc24f, 0xc314, 0x2203, 0xc535, 0x20d7, 0x64f6, 0x6efc, 0xc07d, 0x2197, 0xe67c, 0x8f60,
    0xf225, 0xb6f0, 0x78f2, 0x805c, 0xc679, 0x8d9c, 0x079f, 0x3208, 0xf058, 0xc778, 0x597f, 0xbd16, 0x134c, 0x8135, 0xf6e2, 0x298f,
    0xffc1, 0xe253, 0xadaa, 0xf8a8, 0x4735, 0x43ae, 0x030e, 0x88bf, 0x869c, 0x1303, 0x43f9, 0xf943, 0x4450, 0x6f42, 0x9946, 0xb91c,
    0xbcc5, 0xc5bc, 0xd578, 0x4336, 0x03b6, 0x8c2a, 0x43b8, 0x94cb, 0x3ba7, 0xcc7e, 0x1c0a, 0x6c6e, 0xea6f, 0x2cfe, 0x02c9, 0xa589,
    0x0fd5, 0x6ab8, 0xd00b, 0xd825, 0x56d2, 0x40af, 0x5fa1, 0x8f1e, 0xd44f, 0x8da6, 0x970d, 0xebef, 0xf4e2, 0x4f97, 0xe2dc, 0x3aa2,
    0x07d0, 0xbf58, 0xfcea, 0x500e, 0xdae5, 0x4f34, 0x887b, 0xdbcf, 0x4cae, 0x338d, 0x485d, 0x094c, 0x791b, 0xf655, 0x3218, 0x908d,
    0xc80a, 0x4721, 0x0565, 0x8326, 0x476e, 0x5e7a, 0x9738, 0x20f6, 0xcbcc, 0xc3d7, 0xd00c, 0x138b, 0x5593, 0xfe89, 0x7699, 0x9976,
    0x0395, 0x7d64, 0x8368, 0xa265, 0xbb6d, 0x6dbb, 0x46ed, 0x91df, 0x73ce, 0x8d3f, 0xe9a1, 0x85db, 0x923e, 0xace4, 0xf631, 0x08f3,
    0xb159, 0x355b, 0xe00f, 0x9af7, 0x6e6a, 0xcee7, 0xf11c, 0xf17e, 0x3b55, 0xdc69, 0x7a59, 0xa4a7, 0xa572, 0xd8a4, 0xa7e1, 0x7989,
    0x92cf, 0xf83d, 0x72e3, 0x6277, 0xc96d, 0x668e, 0x17ca, 0x05bf, 0x5865, 0x3a12, 0x2afc, 0x8b3d, 0xc259, 0x6496, 0xda38, 0x68b7,
    0x3a8b, 0x4561, 0xac1b, 0xeb0d, 0x29cb, 0x71f0, 0xf3c0, 0x1986, 0x8e5f, 0x460b, 0xb74b, 0xa24e, 0x57b1, 0xbb99, 0xd64e, 0x38ed,
    0x4eb7, 0xd369, 0xf06c, 0x64a2, 0xed38, 0x4ed6, 0xd270, 0xd287, 0x128d, 0x3a27, 0xda50, 0xbe84, 0x6f32, 0xa490, 0xa096, 0xf212,
    0x4d7b, 0x962c, 0xec05, 0xde10, 0x60fb, 0x4249, 0xf926, 0xfec0, 0xa9ec, 0xd75a, 0xf934, 0x21ae, 0xa900, 0xb5df, 0x23df, 0xaa19,
    0xcd50, 0xf91e, 0xa8ca, 0x8e62, 0x2543, 0x9d08, 0x8e96, 0x3ee9, 0x5faf, 0x9423, 0x96a9, 0xf12a, 0x8217, 0xc322, 0x6845, 0x1781,
    0x40b9, 0x32ea, 0xd534, 0x4a83, 0xdc5e, 0x31e5, 0x0d32, 0xbc30, 0x4247, 0x0cab, 0x09c5, 0xe01c, 0x7104, 0x4c71, 0x39d6, 0xc067,
    0x748d, 0x244c, 0xad95, 0xd517, 0xade1, 0xdee3, 0xfb36, 0xc32b, 0x6629, 0x2d07, 0x4fa0, 0x649f, 0xa562, 0x7ed5, 0x936b, 0xbeb1,
    0x1dd3, 0xfe32, 0x8451, 0x8650, 0xe6c7, 0x7e3b, 0xd74c, 0x53db, 0xd4c3, 0x58cc, 0xaa68, 0xaa2e, 0x5d47, 0xfb2d, 0x9af5, 0xf23c,
    0x2e75, 0x5390, 0x2b71, 0xe7a0, 0x51a3, 0xd6d4, 0xff72, 0x2d61, 0xd819, 0x382e, 0x4371, 0xf277, 0x90be, 0xfac2, 0xcd8e, 0xada8,
    0xb475, 0xccf3, 0xd97b, 0x62b7, 0x5b39, 0x90a6, 0x21b9, 0x9f4e, 0xaa77, 0xb612, 0xf5cb, 0x1398, 0x583b, 0xdc3a, 0x9ee6, 0xde68,
    0xa410, 0xf0ec, 0x967d, 0xbd2d, 0x24c2, 0x4f3e, 0x2e40, 0x793c, 0xb568, 0x163a, 0x12b8, 0xf79f, 0xa7c0, 0x7c50, 0x50f7, 0x0a0c,
    0x9655, 0x9cea, 0x7825, 0x94e2, 0xe720, 0x1699, 0xa8f2, 0xa394, 0x11f0, 0x574b, 0x5e84, 0x8d38, 0xda11, 0xb7c9, 0x917e, 0xdb54,
    0x0f42, 0x4daa, 0xe335, 0x8a6f, 0x56f0, 0x96e2, 0x2f60, 0x86f0, 0x08b1, 0x550d, 0x18fd, 0x54df, 0x87f6, 0xc5e0, 0x066c, 0x0770,
    0xd48b, 0x1be5, 0x4347, 0x0a05, 0x2d09, 0xfdad, 0xe8df, 0x257e, 0xb305, 0x6ab9, 0xfc9a, 0xeba5, 0x949a, 0x89e0, 0x48f8, 0xfa25,
    0x83fb, 0x56d1, 0xa393, 0x4d6c, 0xdabf, 0xa2f0, 0x7146, 0xcf1c, 0xfa66, 0x7942, 0xc458, 0x90d7, 0x35fb, 0xdeda, 0xc85e, 0xea86,
    0x9ac2, 0xcb70, 0x2650, 0xfd46, 0x6cf3, 0x3ee6, 0xaa0b, 0x4410, 0xd1e4, 0xa9c4, 0x049f, 0x4de1, 0x3423, 0x2e96, 0x9ec0, 0x49ec,
    0x29e0, 0xe346, 0xed6b, 0xd5fa, 0xeda9, 0xa66b, 0x7b54, 0x3655, 0x466b, 0x8de0, 0xede0, 0x0cf3, 0x9161, 0x0bc1, 0xfa2c, 0x6dc5,
    0x2792, 0x33df, 0x65df, 0x54a7, 0x6b7b, 0xecd7, 0x6bc1, 0xff47, 0x8d0c, 0xf161, 0x89be, 0xcc8b, 0x5ef6, 0xadd8, 0x4b55, 0xf03f,
    0xb728, 0xfbea, 0x23b0, 0x1ea5, 0xc0b1, 0x0b29, 0x8e85, 0x5a2d, 0xcdc5, 0xc5a4, 0x1074, 0xe26a, 0xf29f, 0x9918, 0x7fa3, 0xf895,
    0xc36e, 0x6268, 0xd893, 0x813d, 0x404c, 0x4951, 0xf918, 0xe593, 0x1177, 0x52a0, 0xde08, 0x66b4, 0xa418, 0xad8c, 0x26f8, 0x89a9,
    0xd46f, 0x6502, 0xb1c9, 0x478e, 0xa742, 0x6f52, 0x92ef, 0xdfa3, 0x5896, 0xc09d, 0xffe1, 0x0b0d, 0x6790, 0xfbd1, 0x4791, 0x3780,
    0xeaf3, 0x6698, 0x07d4, 0x1350, 0x426b, 0x7e6f, 0xd48f, 0x583f, 0xe483, 0x0183, 0x3237, 0x7074, 0x85ec, 0xa86e, 0x0078, 0x2cac,
    0x931e, 0x5f16, 0x9ae2, 0x6b90, 0x08d1, 0x2dc6, 0xd092, 0xdadf, 0x4267, 0x0225, 0x25a5, 0x611b, 0x7e4f, 0x90de, 0xa430, 0x83d1,
    0x9a83, 0x29d1, 0x5beb, 0x91ea, 0x575e, 0xa1c1, 0x423b, 0xf936, 0xead3, 0x3e31, 0x35c4, 0x269f, 0x5b7b, 0x1729, 0xa8de, 0xc4cf,
    0x1bd5, 0x99f8, 0x00c8, 0x83b0, 0x192a, 0x44e8, 0x05f7, 0x6bea, 0x2088, 0x1754, 0x4d48, 0x3c86, 0x7ea5, 0xd50e, 0x3253, 0x4382,
    0xba2d, 0x49f8, 0xa311, 0x9013, 0x1330, 0xf2fe, 0x1408, 0x9e43, 0x525b, 0xd3b9, 0xf9a4, 0x5298, 0x5ef3, 0x01fc, 0xd0ba, 0xee85,
    0x0e47, 0x20b2, 0xd254, 0xc1f0, 0xcef1, 0x7ce3, 0xa6a4, 0x8db9, 0x31cd, 0x830a, 0xd95c, 0x0e7b, 0x7d18, 0x5467, 0x6b29, 0xa71a,
    0x9b51, 0xcb7b, 0xf5ad, 0xf548, 0x8023, 0xdb1d, 0x4d6d, 0x351a, 0x7f46, 0x44d5, 0x4b2c, 0x4ee0, 0x0163, 0x77d5, 0x4cd8, 0x3050,
    0x5f48, 0x617d, 0x1811, 0x1ecb, 0x3586, 0xa241, 0x37bd, 0xbbfd, 0x937c, 0x607f, 0x4fed, 0x3f10, 0xcf23, 0x59af, 0x9868, 0xcbc1,
    0x3217, 0xdafb, 0xcf22, 0xc5df, 0x4fc5, 0x170f, 0xd4cf, 0xaf00, 0x0fd6, 0x23f5, 0x360f, 0xb35a, 0xb4a7, 0x7484, 0x4a32, 0x182b,
    0xfeb5, 0x1e15, 0x93df, 0x37a4, 0x89f0, 0x5ea9, 0x0f21, 0xcd3c, 0xfa57, 0x0140, 0xef04, 0x7f14, 0x6cb0, 0x8792, 0xabee, 0x929c,
    0x0635, 0xf033, 0x4882, 0x746e, 0xb05c, 0xed0c, 0xde02, 0xb541, 0x76a8, 0x2bf5, 0x5162, 0x5731, 0xa2c2, 0x9bc0, 0xd10b, 0xea1a,
    0x24f0, 0xb982, 0x1ca1, 0x7afd, 0x2c8c, 0xc6e2, 0xd8b0, 0x0f7b, 0xcc9f, 0x0820, 0x3f7b, 0xe9be, 0x23c9, 0xdd2b, 0x71fa, 0xba53,
    0xd967, 0xdbd2, 0xc51f, 0xc13b, 0x17fc, 0xc45b, 0xf12c, 0xab55, 0x5040, 0xac76, 0xbbd8, 0x68c8, 0xad45, 0xd93f, 0x0d6a, 0x0587,
    0x4c28, 0x57fe, 0x3fc4, 0xc1ac, 0x7e6b, 0x896b, 0x0dd9, 0x561a, 0x85cc, 0xbef6, 0x7aa7, 0x2b61, 0x137e, 0x2443, 0x7ff1, 0xd565,
    0x0fe2, 0x1bff, 0xaff8, 0x8221, 0x1441, 0xe819, 0xd885, 0x3de0, 0x3d71, 0x1f8b, 0x4218, 0x386f, 0xdc49, 0x2134, 0x037c, 0x46c6,
    0xc563, 0x3cce, 0x4f0b, 0x08b8, 0x062d, 0x6642, 0xa201, 0x39b1, 0xae1e, 0x0e0a, 0x6fef, 0x2f66, 0x0113, 0x6365, 0x1d8b, 0x7301,
    0x7a39, 0xb50f, 0xa0d8, 0x2ab5, 0x00a1, 0x04d7, 0x75ca, 0x01eb, 0x2c09, 0xc625, 0xdbf5, 0x4aeb, 0xaef4, 0xe947, 0xa660, 0x3f28,
    0x82ce, 0x7d74, 0x6aa5, 0xbb11, 0x7cdf, 0x6d59, 0xa0b0, 0xb286, 0x1b5f, 0x7436, 0xcfd8, 0x67c4, 0xcfff, 0x990f, 0xc86f, 0x65fe,
    0x4618, 0x617f, 0x959b, 0x35fe, 0xd4bc, 0x064a, 0x625a, 0xbf5b, 0xf15a, 0x7242, 0xfdd6, 0x8746, 0xd8e5, 0x29a0, 0x3bdf, 0x872c,
    0xb353, 0x90f4, 0x9b30, 0xd5b3, 0x7969, 0xb73e, 0xa90a, 0xd6ab, 0x00c2, 0x5327, 0x987c, 0xaba1, 0xde01, 0x440f, 0x6e69, 0x8323,
    0x8ff5, 0x2920, 0x2fc2, 0xedf0, 0x56ff, 0x0cdf, 0xcf90, 0xbc96, 0xb1aa, 0x2859, 0xa810, 0xc2f6, 0xe2d5, 0xf296, 0x7798, 0x81d3,
    0x307f, 0xdcf2, 0xf3fc, 0x18e0, 0xca8e, 0x0497, 0x3c26, 0x2fcd, 0xa552, 0x2eba, 0xd437, 0xbc87, 0x47fc, 0x7dff, 0xf1bd, 0x009a,
    0x78ff, 0xce52, 0x46b7, 0x2292, 0xe3ca, 0x18e7, 0x403e, 0x43ec, 0xa029, 0xe5d8, 0xf865, 0xdc4d, 0x9c74, 0xab03, 0x65b2, 0xa14d,
    0xf0fc, 0xd8f9, 0xabd6, 0x0aa9, 0xc185, 0x38be, 0xa28e, 0x08f4, 0x58c6, 0x7590, 0x020f, 0x5f67, 0xfb19, 0xf88c, 0x3673, 0x6003,
    0x2846, 0x53d8, 0xafaa, 0x59b0, 0xc93d, 0x1389, 0x5dc0, 0xbe8c, 0x7b5c, 0xa56c, 0xdf81, 0xba21, 0x0521, 0x9bc8, 0x9d43, 0xe831,
    0xf584, 0xba8d, 0x56f7, 0xab5b, 0x1417, 0x3dcc, 0x2a34, 0xc046, 0x6f55, 0xda12, 0xfd67, 0xc243, 0xcec7, 0xe787, 0x9332, 0x906e,
    0xf861, 0x292e, 0xb51d, 0xdc38, 0x53e6, 0x5715, 0xe585, 0x2cb8, 0xb139, 0x01a2, 0x06bd, 0xbe9d, 0x9e57, 0x7f9a, 0x984c, 0x9c0f,
    0x69dd, 0x9a64, 0x3421, 0x49dc, 0xdc83, 0x3d39, 0xc965, 0x1aa5, 0x08b5, 0x51a7, 0xc372, 0xa2c6, 0xcbd0, 0x4739, 0x5ea6, 0x2b3e,
    0x9b53, 0x2caa, 0x0483, 0x2f7a, 0x9ad7, 0x868d, 0xfd95, 0x7e90, 0x8fab, 0x0754, 0xe12a, 0x2ec0, 0xcafc, 0x04f9, 0x7acb, 0x5496,
    0x4cd6, 0xd9e5, 0x80fe, 0x5fda, 0xb459, 0xd781, 0x5783, 0x5e47, 0xceed, 0xedf1, 0x9c40, 0x0737, 0x710e, 0x51c0, 0x07fa, 0xdec7,
    0xff78, 0x52ce, 0x5d51, 0x37a6, 0x64b3, 0xce78, 0x26ea, 0xb16e, 0x35f8, 0xf31b, 0xc8ae, 0x5424, 0x1684, 0x0b87, 0x0eff, 0xed04,
    0x2110, 0xb210, 0x32d0, 0x590c, 0xb6e0, 0x0d53, 0x0847, 0x73bf, 0xc94d, 0xe42e, 0x0f02, 0x675f, 0x44a6, 0x3315, 0x1c8a, 0x8a1d,
    0x1254, 0x983e, 0x0c9f, 0xb7d4, 0x4d31, 0xfd2c, 0x1a11, 0xcddf, 0x6afb, 0x7aa1, 0xfcc4, 0x028c, 0xe18f, 0xcdbc, 0x3f6b, 0x13f1,
    0x1a4b, 0x557e, 0x07bd, 0xbda9, 0x059f, 0x55e8, 0x14ee, 0xa4ee, 0x0f94, 0x477a, 0x855a, 0xad1c, 0xa980, 0x7089, 0xf45b, 0xd2b1,
    0x72c3, 0xc6a2, 0xd09d, 0xdcb3, 0xcd29, 0x81e4, 0xad7e, 0x0278, 0x0656, 0x32f6, 0xf9a7, 0xe579, 0x0bc0, 0x23c8, 0x13c7, 0xda37,
    0xaa51, 0x965c, 0x6b10, 0x47d1, 0xf9e3, 0x0b63, 0x0a40, 0x90c8, 0xa025, 0x2124, 0x61f8, 0x2e29, 0xd7e8, 0x1e46, 0x1fb0, 0x83a5,
    0xa6a0, 0x7f8c, 0x5a8f, 0x6772, 0x06df, 0xc73f, 0xbc9d, 0xd351, 0x0ad8, 0xc41c, 0x2639, 0xa027, 0xf81d, 0xa21b, 0x49e4, 0x76f4,
    0x2b2f, 0x8fa8, 0x2f79, 0xee1c, 0x12e4, 0x9cc7, 0x584f, 0xa8db, 0xd9bc, 0x1214, 0xc623, 0xb882, 0xc441, 0xc59b, 0x621f, 0xf201,
    0xf433, 0xd8c3, 0x3880, 0x5d7f, 0x8b1d, 0x0173, 0x1169, 0x0343, 0x646c, 0xc037, 0xef5c, 0xa5bf, 0xd147, 0x106b, 0xe8eb, 0xb529,
    0x7b67, 0xb2bd, 0x2664, 0xd062, 0xe5d4, 0xdab4, 0xf632, 0x5606, 0xc02d, 0xbe5b, 0x2fe6, 0xf4c0, 0xe031, 0x847a, 0x4114, 0x19e8,
    0xa53f, 0xb12b, 0xcf24, 0x17dd, 0xe0e7, 0x4b49, 0xbe28, 0xb4af, 0x5845, 0x2918, 0xce00, 0x6ea5, 0x8db5, 0x4865, 0xd5eb, 0xb76c,
    0x2e51, 0xfd49, 0xfc29, 0xe7be, 0xdd0a, 0xd651, 0x5a79, 0xd3e0, 0xb7ca, 0x67e3, 0x6e15, 0xca00, 0x8ae7, 0xa06e, 0xa05a, 0x0555,
    0xdb09, 0x2a6a, 0xe7f8, 0xdbe0, 0xbcd4, 0x4a06, 0x66a6, 0xc2fd, 0xa01f, 0xcd01, 0x32f8, 0x4ab6, 0x1bf3, 0xf835, 0xc3bd, 0x33ed,
    0x1507, 0x553c, 0x4160, 0x03d5, 0xd197, 0xb80b, 0x0c59, 0xd032, 0x472f, 0xa1f6, 0xdd81, 0x456f, 0x6476, 0xe261, 0x696e, 0x2383,
    0x96f6, 0xbe8f, 0xee1d, 0x699f, 0x8bbe, 0x27be, 0x4bbf, 0x242e, 0xa0ce, 0x33d9, 0x235c, 0x46d6, 0x4b88, 0x068f, 0x92c0, 0x5c62,
    0xda18, 0x5917, 0x07ea, 0x2c1e, 0x56aa, 0x1bb1, 0xf055, 0x294f, 0x2fc3, 0x6ee2, 0xc109, 0x9149, 0x940a, 0xa7ca, 0x8c40, 0x9487,
    0xd1f1, 0x3605, 0x09b8, 0x16cd, 0x8f62, 0x532a, 0xffd3, 0x51da, 0x4e97, 0xaece, 0xeaab, 0x6c16, 0x13f3, 0x300a, 0x904d, 0xb838,
    0x84b6, 0xd55b, 0x260d, 0x8530, 0x9304, 0xf389, 0xf955, 0x2c69, 0xa358, 0xc208, 0x60cf, 0xaa3e, 0x8175, 0x5a24, 0x74f5, 0xe3f7,
    0x0660, 0xc364, 0x515a, 0x1c87, 0x6482, 0xfa63, 0x43ca, 0x2046, 0xba78, 0x6172, 0x7506, 0xc99e, 0x2623, 0x92f5, 0xa4a5, 0x73f0,
    0x0829, 0x44de, 0x8313, 0x018c, 0x5516, 0xa9cd, 0x2d10, 0xb61b, 0xc781, 0xeeaa, 0x3a30, 0xc3e0, 0x21e1, 0xb3fe, 0x8622, 0x43f7,
    0x1bf2, 0x7f99, 0xbf20, 0x9aba, 0x8010, 0x7f36, 0xc08f, 0x638f, 0xb5dd, 0xdce6, 0xc1e1, 0xad66, 0xb328, 0x8e7c, 0xc978, 0xf3d9,
    0xd250, 0xeb9b, 0x4988, 0x7563, 0x94a4, 0x7ed8, 0x2215, 0x6a29, 0xbb3f, 0x9498, 0x35c1, 0x2840, 0xcaf9, 0xfee9, 0xa98b, 0x0c6c,
    0x9efe, 0x5199, 0x5205, 0x45e7, 0xb05e, 0xbd9e, 0x5991, 0xf77a, 0x9c70, 0x5d00, 0xc4cd, 0xf5be, 0x28ab, 0x73b0, 0xe91e, 0x4305,
    0x3087, 0x9622, 0x61b0, 0x9962, 0x070d, 0xa02f, 0xb702, 0x3af8, 0x9e22, 0x53ff, 0xc097, 0x0d68, 0x4eb6, 0x999b, 0x3fc3, 0x1ea4,
    0x96b6, 0xdd8e, 0x1596, 0x926a, 0x7790, 0x9f54, 0x6782, 0xf09f, 0x911d, 0xc0e0, 0x0ae2, 0x8f18, 0x4352, 0xae71, 0x5cae, 0x3185,
    0x829a, 0x31fe, 0xce45, 0x79fa, 0xf1f2, 0xace5, 0xd71c, 0xb30c, 0x6c88, 0x0511, 0x9bec, 0xc9fa, 0xc1ec, 0xd1c3, 0xf4d1, 0x6e33,
    0x8733, 0xcbc2, 0xe543, 0x2036, 0xaaff, 0xf6e4, 0xea55, 0x3822, 0x5b63, 0x5445, 0x861c, 0x8800, 0xf13d, 0xf45d, 0x3589, 0xdc78,
    0xe35c, 0xa486, 0xdf02, 0x0afe, 0x67a6, 0x8eab, 0xc29e, 0x3142, 0x6f12, 0x89b1, 0xebff, 0x917f, 0x254b, 0x0b20, 0x6052, 0x74d7,
    0xbd3a, 0xe7cb, 0xd396, 0xccec, 0xba71, 0xc6e4, 0x3772, 0x850f, 0xc0d9, 0x0edd, 0xff1e, 0x86d3, 0x3a07, 0x2db0, 0x2a28, 0x9abb,
    0xfc8d, 0xddda, 0x2f4a, 0x63e1, 0x4ea7, 0x3b2b, 0x2898, 0xf5a6, 0x3cf5, 0x3bc3, 0x6657, 0x1349, 0x2d49, 0x6ee8, 0x79ee, 0xd9c6,
    0xda30, 0x2b30, 0x83dd, 0x2e35, 0x17a3, 0x06d7, 0xddaa, 0x6830, 0x27a2, 0xac52, 0xa93e, 0x20ef, 0x92b9, 0xc0a8, 0x0e6b, 0xe614,
    0x101f, 0x7c73, 0xec32, 0x62ec, 0x051a, 0x0ee6, 0xeeb3, 0x5d09, 0x212d, 0xf324, 0x6eeb, 0x2921, 0x0e13, 0x724b, 0xda1b, 0x075d,
    0x5f00, 0x052e, 0xe5ab, 0x8c55, 0x20ae, 0x88f1, 0x92e1, 0x3809, 0xe546, 0x4e63, 0x7b08, 0x1e0f, 0xb52c, 0x23a7, 0x0f31, 0x4c80,
    0x47e2, 0xcbfe, 0xfb93, 0x9ed6, 0x3dc1, 0xe9fd, 0x8b4f, 0x8153, 0x919b, 0x7a7c, 0x2a9c, 0xc68f, 0xbb79, 0xbbcb, 0xa829, 0xe31f,
    0x2518, 0xc957, 0x0089, 0x198a, 0xf54c, 0xc4d3, 0xf12e, 0x3659, 0xc54e, 0x62e3, 0x3d6b, 0x6538, 0x1543, 0xe4de, 0xd463, 0xf5f6,
    0xd62e, 0x70b2, 0x8355, 0xc3fe, 0xcb1b, 0x6334, 0xd8b6, 0x6c42, 0x34b5, 0xea12, 0x42c5, 0x2a91, 0xa149, 0xa5ed, 0x7021, 0xf35d,
    0x495e, 0x5722, 0x9536, 0xaba8, 0xa22e, 0x78a5, 0x6f44, 0x947b, 0x4e07, 0x61de, 0x727d, 0xa18c, 0x34d3, 0xe378, 0x0b89, 0xefd2,
    0x1aa4, 0x0c58, 0x3b2a, 0x5c12, 0x02a5, 0xf2a9, 0xd299, 0x885a, 0x3ede, 0x6877, 0x60a7, 0x3d92, 0x68cb, 0x1e9c, 0x8345, 0x2a5d,
    0x6d69, 0x3d2b, 0xdf45, 0xdf13, 0x67d3, 0xc501, 0xb75d, 0xedb8, 0x8e3f, 0xde3a, 0x2d50, 0xaa82, 0x2458, 0xb74a, 0xf160, 0x503f,
    0x204e, 0x9b83, 0x20f3, 0x204a, 0x3602, 0xa151, 0x4573, 0x73c3, 0x2314, 0xec29, 0x3cd6, 0x96c1, 0xf70c, 0xed3e, 0xb7b0, 0xc8b6,
    0xabfb, 0xf1ca, 0x75a8, 0x9892, 0xc81d, 0x7660, 0xd461, 0x561c, 0xb643, 0x7c6a, 0x27bb, 0x0f9e, 0x864d, 0xc695, 0x14dd, 0x3020,
    0x4133, 0xa0fd, 0x4c1d, 0x3683, 0x923f, 0x2f30, 0xd837, 0x301e, 0xf39e, 0xf8d5, 0x8fcf, 0x50d3, 0xcc48, 0x8aca, 0x2584, 0xc2ee,
    0x9869, 0x69cf, 0x080f, 0xb91f, 0x28a9, 0x7764, 0x322a, 0x8454, 0x0ec9, 0x0f6f, 0x342d, 0x7152, 0x4541, 0xb71f, 0x66dc, 0xa3e9,
    0x9fb3, 0x1c63, 0xf479, 0xd0c2, 0xcd10, 0x2dae, 0x4f46, 0xd49e, 0xc5d0, 0xf060, 0xdb55, 0xacb4, 0x517b, 0x48d5, 0x4e4b, 0x9b7f,
    0x0f88, 0x39be, 0xcdfe, 0x0ac3, 0x49ad, 0xf7ea, 0x4780, 0x97e2, 0x0e43, 0x0044, 0x25f5, 0xfc94, 0x194c, 0x992d, 0xbf21, 0xf997,
    0xbbbf, 0xbae1, 0xf516, 0x5422, 0x5c13, 0x8402, 0x9988, 0xa4ff, 0x29ab, 0x1016, 0x8866, 0xd716, 0x1a5a, 0xf754, 0x6b05, 0xba62,
    0x8fa9, 0x49ce, 0xd6b2, 0x393e, 0x52c1, 0x35d5, 0x837a, 0xea71, 0x0462, 0x3ca4, 0x5906, 0x9e8d, 0x507d, 0xc9c7, 0x2dea, 0x44a8,
    0x65ae, 0x7240, 0x3feb, 0x1e12, 0x1966, 0x39ae, 0x8d51, 0x75cd, 0x2f0e, 0x7618, 0x8ff6, 0x8b35, 0xbab0, 0xfbe1, 0x7f84, 0x916b,
    0x5be8, 0x11c7, 0xc669, 0x3d94, 0x85bb, 0xb33b, 0x9ad4, 0x7eaf, 0xe3c6, 0xac49, 0xf5f4, 0x611d, 0x2f08, 0x1465, 0x69ed, 0x3fb9,
    0x2b92, 0xd7b9, 0xf46c, 0xc832, 0x34e6, 0x6e54, 0x4df3, 0x8b0e, 0x4a31, 0xfa24, 0x5592, 0x14db, 0xb056, 0xa62b, 0x0928, 0xc994,
    0x91fb, 0x80f0, 0xf0c5, 0x7414, 0x4c1c, 0x79f9, 0x7b66, 0xd8f8, 0x73ae, 0x7709, 0x2176, 0x780f, 0xbd5d, 0x8d03, 0x5676, 0x4e9d,
    0xd958, 0x44c0, 0xced4, 0x7d25, 0x6682, 0xfb41, 0x0bd3, 0x6fbc, 0xba43, 0x3a05, 0x060f, 0x5d0c, 0x89f6, 0x7df9, 0x5df0, 0xdd84,
    0xcf58, 0x42b1, 0xda8b, 0xaa46, 0xc50c, 0x4480, 0x5f08, 0x96bd, 0xec4a, 0xe94f, 0x7f52, 0x4b94, 0x14f6, 0x8a11, 0x6ea3, 0x3d61,
    0x3380, 0x5ba9, 0x5b85, 0x3280, 0x77e0, 0x6e88, 0xff59, 0xf090, 0x6909, 0x2799, 0x2251, 0x975b, 0xacc4, 0x42b9, 0xbd7b, 0xc8ac,
    0x83c0, 0xd9d7, 0xb22b, 0x1509, 0xdbfb, 0x8bd9, 0x1086, 0xce1b, 0xbcb1, 0x4633, 0xc640, 0x0397, 0x0752, 0xcbeb, 0x3de7, 0xabf1,
    0xf611, 0xe561, 0x3d46, 0x6f5f, 0xd0dd, 0x925a, 0xfbfc, 0x8881, 0x2c84, 0x0844, 0x94b3, 0x3fde, 0x8f33, 0xf158, 0xc6ff, 0x83f8,
    0x00d0, 0xc676, 0x4be9, 0xae2c, 0x6e58, 0x58d4, 0x08c3, 0xec2f, 0x81e8, 0xc03b, 0x473d, 0x3cd2, 0xa033, 0x89b5, 0xc9cb, 0xc95b,
    0x7bb9, 0xf3ac, 0x29b9, 0x85dc, 0x3eec, 0x7415, 0x8a81, 0x91a9, 0xbb4d, 0xed26, 0xbdcd, 0xa366, 0x19cf, 0x6c96, 0x3d03, 0x2288,
    0xe934, 0xb44b, 0x727f, 0xdad3, 0xb935, 0x9572, 0x9190, 0x6080, 0x56c0, 0x20e6, 0x3239, 0x48a0, 0x744c, 0x7d22, 0xe605, 0x47f2,
    0x6917, 0xd409, 0x77a5, 0x4a3f, 0x91bf, 0xbb5b, 0x16ab, 0xeff7, 0x452d, 0x42a4, 0xb151, 0xbf83, 0xbed7, 0x11f1, 0x475c, 0xc61b,
    0x8348, 0x03a4, 0x2a6c, 0xb823, 0x18e3, 0x9cfd, 0xdad1, 0x3706, 0x4468, 0x7f37, 0x4723, 0xe4fb, 0x2e2f, 0xaf71, 0x9a3a, 0x3876,
    0x11ba, 0x54bb, 0x25c2, 0x02a6, 0xcb8e, 0x6209, 0xea98, 0xc667, 0x169d, 0x58d0, 0xfbd5, 0xb986, 0x6dbf, 0xcc82, 0x3077, 0xd028,
    0x757f, 0x5e39, 0xd2d6, 0xdbb1, 0x0727, 0x6da2, 0x4359, 0x5850, 0x93c1, 0x5685, 0xe996, 0xc76b, 0x7d44, 0x5979, 0x4b79, 0x6af1,
    0xb4cd, 0xe1ae, 0x3ded, 0xb54e, 0x50bd, 0x7db5, 0x6acb, 0xe6fb, 0x5efd, 0xa935, 0x98dc, 0x374e, 0x0e77, 0xbc97, 0x19fc, 0xc591,
    0x5a9a, 0x0975, 0x0ceb, 0x9638, 0x4465, 0x6c8f, 0xa422, 0x5191, 0xa2ef, 0x89ef, 0x95aa, 0x46ec, 0xe6b5, 0x61a3, 0x6d16, 0x75e0,
    0x9718, 0x24b0, 0xe521, 0x2310, 0x9525, 0xdeb2, 0xf7b1, 0x81fe, 0xc60d, 0x92b0, 0x5b27, 0xcdcc, 0xa971, 0xec1e, 0x5d1c, 0x224b,
    0x60e9, 0x07ec, 0xf68d, 0xc4f1, 0xe0c8, 0x5b9a, 0x21cb, 0xcef7, 0x9973, 0xfcec, 0x50eb, 0x2531, 0x7308, 0x2962, 0xaecb, 0x80d2,
    0x1f0a, 0xe46e, 0xc95a, 0x4678, 0xc0df, 0xb642, 0xdc4c, 0xef5b, 0xfe78, 0xc2d8, 0x734a, 0x2079, 0x5e5a, 0xadcf, 0x352f, 0x8192,
    0x7db7, 0xec2b, 0x6b69, 0xd8ed, 0xc199, 0x22fa, 0x90d0, 0xe057, 0xc7ea, 0xc09f, 0x96a2, 0x5221, 0x3d33, 0x755c, 0xb94f, 0x16ec,
    0xc8e7, 0x8b32, 0x2081, 0x679a, 0x6ce1, 0xcbf7, 0x2d73, 0x9203, 0xbec9, 0x9fac, 0x6901, 0x2675, 0x43e8, 0xb374, 0xbeef, 0xed97,
    0x18ad, 0x51b2, 0xc252, 0xb97a, 0x8306, 0xdaad, 0xaa7a, 0x1d12, 0xb1ee, 0x0598, 0x7735, 0x5054, 0x07a5, 0x5eed, 0x2cf7, 0x2774,
    0x764f, 0x3c1f, 0x8fb5, 0x56de, 0x0968, 0x4908, 0xfe44, 0x898a, 0xe70e, 0xcf47, 0x3960, 0x7347, 0x10b0, 0x1a9e, 0x24b7, 0xe130,
    0x69a1, 0x938a, 0xccad, 0x0da6, 0x2096, 0xb8ec, 0x4259, 0x58a4, 0xd827, 0x0c34, 0x6b98, 0x5fbd, 0xc3b7, 0x08bf, 0x4679, 0x424f,
    0x403a, 0x8834, 0xe9a2, 0x6309, 0xf0c6, 0x95d1, 0x4a95, 0xe8ba, 0x4296, 0x4cbc, 0x5873, 0xa730, 0xf066, 0xf036, 0x8763, 0xa3a9,
    0xcfec, 0xcedf, 0x7a57, 0xa3f4, 0xf1f9, 0x6a1a, 0x937d, 0x593f, 0x31c9, 0x013d, 0x131e, 0xe697, 0x85f6, 0x7936, 0x4ef1, 0x72fe,
    0xde83, 0xd4de, 0x3305, 0xf941, 0x1ec0, 0xedc4, 0xdef5, 0x1918, 0x6c05, 0x0e62, 0xc0b8, 0xa44b, 0x574c, 0xad60, 0xdb38, 0xcf3d,
    0x0c3f, 0x25c5, 0x930f, 0x3574, 0xa8fe, 0x048f, 0x610d, 0xa331, 0x8011, 0x9120, 0x431a, 0x1cc1, 0xeb77, 0x4b4c, 0xd4ef, 0x25b8,
    0x068c, 0xb3aa, 0xf2aa, 0xa3b3, 0x9956, 0x89de, 0xaa2b, 0xf4c6, 0xb143, 0x4391, 0x2e60, 0x63b1, 0x39f6, 0xb7f2, 0x4fb3, 0xec25,
    0x8e41, 0x0729, 0x9a19, 0x7c05, 0xb04a, 0xf9d4, 0xa8dc, 0xcc69, 0x1179, 0xe60b, 0x0406, 0x9ba2, 0x70e7, 0x7bc9, 0xebc9, 0x2c7a,
    0xe3df, 0xda70, 0x17ea, 0x62c4, 0xe2fc, 0x2f93, 0x9435, 0x0585, 0x5573, 0x7e59, 0x9df8, 0x4a6b, 0xcf91, 0x6516, 0x032e, 0x8cf9,
    0xcfeb, 0xb44a, 0xc891, 0x3007, 0xe0e6, 0x1388, 0x3229, 0x3821, 0x713b, 0xb007, 0xade7, 0x6fd0, 0xac06, 0x65d6, 0xa636, 0xcab3,
    0x1ce9, 0x856d, 0xbc53, 0xbf9c, 0xb66c, 0x4491, 0xb36c, 0xef19, 0x4892, 0xb649, 0xefb8, 0xb6cd, 0x5266, 0xd20d, 0x540b, 0xa0aa,
    0xd591, 0xe11c, 0x3a43, 0xf708, 0x3d7b, 0xbd60, 0x0f33, 0x4beb, 0xa9b8, 0x2e2c, 0xe916, 0x344b, 0x6a98, 0xb705, 0xd0bc, 0xeda1,
    0x15aa, 0x4dcc, 0x1973, 0x42d8, 0x394f, 0x6d97, 0x87a4, 0x9a9d, 0x4cad, 0xe308, 0x4fec, 0x54de, 0xe10c, 0x74c6, 0x304a, 0xaf92,
    0x4097, 0x75be, 0x3b3f, 0x5ce6, 0x0622, 0xf3ef, 0x0175, 0xb009, 0x6c32, 0xae34, 0x7c8d, 0x67cb, 0x429e, 0xb821, 0x71f2, 0x1f54,
    0xad4f, 0x16c1, 0xce06, 0xe876, 0x5463, 0x735d, 0x352c, 0x3bcb, 0x56b2, 0x9e11, 0x8f87, 0x3ae1, 0xb229, 0x549e, 0x481d, 0xaf2f,
    0x187c, 0x0746, 0x2552, 0xa858, 0x9d8a, 0xc6c5, 0x4fff, 0x6947, 0xb420, 0x5c38, 0xccd5, 0xaca9, 0x228e, 0xc3eb, 0x9416, 0x9388,
    0x79a7, 0xae28, 0x8ad7, 0x9213, 0x8efe, 0x0a1d, 0x618f, 0xf088, 0x67f8, 0x83d4, 0x16f6, 0xd916, 0x9168, 0xd605, 0x60e7, 0x5651,
    0xcfa1, 0xefd0, 0x2f63, 0x6560, 0x878f, 0xe13a, 0x85de, 0xe321, 0x3909, 0x2b27, 0x82ed, 0x2806, 0x7a51, 0x1f0b, 0x2c13, 0xa71c,
    0x2de8, 0x8d40, 0xe1d5, 0xf733, 0x5f50, 0x043e, 0xc1be, 0x80f1, 0x7d14, 0xb106, 0x6807, 0xa769, 0x4f77, 0x9a4e, 0x9740, 0xbe75,
    0x46b3, 0xcaee, 0xa1c7, 0x3008, 0xf6b3, 0x3f11, 0x0d7c, 0x7386, 0x378c, 0xb88e, 0xe84f, 0x2bc8, 0xb8bf, 0x2789, 0x08a1, 0x23d3,
    0xe2bc, 0xf32a, 0xf13b, 0xd694, 0x4c41, 0x5cde, 0xc46d, 0xf971, 0xc2df, 0x2236, 0x71a1, 0xb58e, 0x5500, 0x4be5, 0x59f0, 0x5e85,
    0x4517, 0xda61, 0x99ed, 0xe363, 0xebcf, 0x4ab4, 0x2c9e, 0x0261, 0x369c, 0xf8f7, 0x41ca, 0x6390, 0xb86b, 0x6d33, 0x578e, 0xdd5f,
    0x277e, 0xd29a, 0x8101, 0xa6e8, 0x2637, 0x8dd3, 0xba65, 0xf1da, 0xe5f7, 0xda27, 0x378f, 0x1b69, 0xb2ed, 0x29e7, 0xb8ef, 0xcdb6,
    0xa5a8, 0x5488, 0x5a40, 0x499d, 0x9fd4, 0x12e5, 0x4894, 0xe5d6, 0xd42f, 0x88c5, 0xb28d, 0xd3c9, 0xb09b, 0xbe0b, 0x5b5d, 0xed3a,
    0x9ff9, 0x04bd, 0xefdf, 0x562d, 0x30d4, 0x70a1, 0x2c07, 0x68ee, 0xfb0a, 0xdf6d, 0xa2cc, 0xf239, 0x50ac, 0x33d6, 0x56ea, 0x0ce0,
    0x6b25, 0xe119, 0x4e0d, 0x400b, 0xb4b1, 0x344d, 0xd481, 0xfaf2, 0x3c54, 0x2abc, 0xd8d6, 0x1155, 0xf180, 0xbec1, 0x9d54, 0x9556,
    0xbf82, 0xc0b7, 0x2235, 0x5118, 0x906d, 0xa059, 0x0b1f, 0x517a, 0x6072, 0x3f9d, 0xb3f3, 0xce65, 0x2062, 0xff3e, 0xddca, 0x2ee3,
    0xab06, 0xfd87, 0xa2ae, 0xda54, 0x986c, 0x00cc, 0xf92a, 0x04a3, 0xf1dd, 0xd00a, 0x9ce9, 0x9b50, 0x9dfb, 0x4238, 0x75ea, 0x3c65,
    0x1caa, 0xf5b6, 0xd25d, 0x07dd, 0xe33e, 0x2659, 0xad9e, 0xd984, 0x78fb, 0xdda1, 0xf075, 0x056e, 0xd60b, 0xd7b3, 0x6cfa, 0x38a0,
    0x4595, 0x736a, 0xf7d1, 0xd2de, 0xb96f, 0x6a5b, 0x7e61, 0xc272, 0x034e, 0x263f, 0xefc3, 0xf2ca, 0x336d, 0x6bb8, 0x939d, 0x5839,
    0x3d23, 0x6cba, 0xdabc, 0x77c5, 0x32cd, 0xe9b6, 0xdaf1, 0x65ba, 0xb927, 0x2271, 0xfc1c, 0x2969, 0x5696, 0x6f1a, 0x2e94, 0xc689,
    0x483d, 0x867f, 0x1e77, 0x8af7, 0x1545, 0xe936, 0x3249, 0xeb38, 0x77f8, 0x6827, 0xc48d, 0xb860, 0x5b7d, 0x0076, 0x366d, 0x9a0d,
    0xf164, 0x0813, 0xeeb7, 0x3a34, 0x6e6d, 0xabda, 0x66aa, 0xc8b2, 0x6d1a, 0x9313, 0x8a85, 0x2255, 0x304e, 0xefe3, 0x3269, 0xc491,
    0x6fb9, 0x5b6a, 0x91b8, 0x0c17, 0x80dc, 0x3853, 0xeae5, 0x4b09, 0x07b0, 0x3b71, 0x7c7e, 0x9a86, 0xe46f, 0xeed6, 0x6e4d, 0xa55c,
    0x73cf, 0x36ce, 0x9cbf, 0x53bc, 0xf186, 0x11d7, 0x91fc, 0x7981, 0xb43d, 0x179a, 0x942e, 0x89c6, 0x3b9c, 0x1f3d, 0x5806, 0xd1eb,
    0x1d78, 0x9b45, 0xc892, 0x1747, 0x4fee, 0x5a7b, 0x3265, 0x024a, 0x3f2f, 0x8389, 0xeeb0, 0xee5a, 0xf222, 0x17cc, 0x016d, 0xa606,
    0x8aac, 0x5e6e, 0x15a3, 0x364a, 0xa523, 0x514a, 0x44fa, 0x98e8, 0x5119, 0xdb23, 0x6549, 0xb7ac, 0xe16e, 0xecce, 0x8d39, 0x1b95,
    0xcadd, 0xe32e, 0x4ec6, 0x5068, 0xd40b, 0xa5ef, 0x1342, 0xc49d, 0x76e8, 0x06ce, 0xc090, 0xaeb2, 0xa716, 0xd510, 0x53a5, 0x3365,
    0x885b, 0x819c, 0x34ae, 0x326c, 0x1dc4, 0x20ab, 0xee97, 0x3283, 0x7271, 0x24e9, 0xb1b4, 0x4d34, 0x9b13, 0x201a, 0xf8ce, 0xaed1,
    0x810a, 0x2f6c, 0x8ae0, 0x3a4c, 0x9cc8, 0x4ecf, 0xd266, 0x1e80, 0x5b8e, 0xc672, 0x3df6, 0x7288, 0xe52a, 0x6b72, 0x330e, 0x9a22,
    0xf51f, 0x75b1, 0x20fc, 0x0092, 0xce4e, 0xd39f, 0x831c, 0x520e, 0x6b19, 0x5d5a, 0x07f3, 0xcf2d, 0x4f14, 0x95a4, 0x5700, 0x048c,
    0x6871, 0x5136, 0x6de2, 0x4c01, 0x38ba, 0x9644, 0xa303, 0x3e0c, 0x97c6, 0xc911, 0xe288, 0xad76, 0x5ab7, 0x34d9, 0x6f2a, 0xf627,
    0xf2f8, 0x2299, 0xec98, 0x5922, 0x48e2, 0x3499, 0x309c, 0x5ebc, 0xdba3, 0x7411, 0x06ae, 0xc0f6, 0x6600, 0x364c, 0xb72e, 0xa244,
    0xee9f, 0xaf9c, 0x5cba, 0x5930, 0x79de, 0x6d3b, 0x5b40, 0x81a9, 0x3739, 0x81c2, 0x8e49, 0x09e8, 0x5f7c, 0xb68f, 0x8498, 0x3756,
    0xea23, 0xcbca, 0xee8e, 0x83da, 0xdb5d, 0x6dce, 0xc070, 0x0a15, 0x8f69, 0x288f, 0x38f6, 0x08fc, 0x5294, 0x48e9, 0xd14f, 0x15db,
    0xd5c1, 0x406d, 0x3345, 0x08c6, 0x0065, 0x0ab7, 0x49ea, 0xee5d, 0xfa02, 0xd070, 0x03e3, 0x2d4c, 0x47df, 0x7b4b, 0xe76e, 0x591a,
    0x76d8, 0x3691, 0x5430, 0xee91, 0x5c20, 0x4bb3, 0xc489, 0x9ee4, 0x7571, 0x1264, 0x0035, 0x853e, 0x0be3, 0x7a08, 0x63ef, 0xfd03,
    0x157c, 0x53ca, 0x327a, 0xf6a4, 0x77d3, 0x3b65, 0xb3a7, 0x5126, 0xe884, 0xf59d, 0xd8dd, 0xbfaa, 0x9774, 0xf741, 0xa6f6, 0xf41e,
    0x328e, 0xfdbe, 0xfde1, 0xc840, 0xedab, 0x85ea, 0x02b4, 0x777c, 0x9761, 0x6317, 0xa3c1, 0xe212, 0x67a8, 0xfe7a, 0x1d07, 0x231e,
    0x4e11, 0x53a9, 0x680b, 0x3530, 0xced8, 0x1a00, 0x1322, 0xaa7e, 0x5a93, 0xd5ef, 0x9c44, 0xa0b4, 0x498c, 0xf4d5, 0x25f9, 0x92e5,
    0xda84, 0xe74c, 0x1dbb, 0x6d2d, 0x504c, 0xd153, 0xf8b8, 0x1c2c, 0x6d94, 0x4e9e, 0xb85c, 0x3c5a, 0xdbaa, 0xa8a7, 0x1fd5, 0x91e0,
    0x2c97, 0xc92f, 0xc7e4, 0x69c0, 0x8424, 0xb404, 0xea64, 0x4018, 0xbb37, 0x2be4, 0xa5cf, 0xa242, 0x6940, 0x65d7, 0x74aa, 0x6ca6,
    0xa154, 0xe721, 0xb456, 0x99d1, 0x00c5, 0x5db0, 0xcb81, 0x2063, 0x80d5, 0xbacc, 0x6020, 0xd0ff, 0xc894, 0xa662, 0x6022, 0xac6c,
    0xbf1a, 0xde73, 0x20a2, 0x0d91, 0xa9fc, 0xdce7, 0x9e35, 0x3513, 0xc181, 0x3b22, 0x6144, 0xd488, 0x5038, 0x26e7, 0x0c7b, 0x8447,
    0x50f1, 0xf0aa, 0x9832, 0x5b32, 0x92ee, 0x3ee8, 0x375f, 0x2327, 0x434b, 0x9eea, 0x25a9, 0x0ddd, 0xfcee, 0xf6e6, 0xcabd, 0x3edf,
    0xdd68, 0xbe7e, 0x9391, 0xaf9b, 0xa565, 0xaeda, 0x3c6e, 0xc49a, 0x3d6a, 0xc99d, 0x6afa, 0xc624, 0x75e9, 0xeda0, 0x7307, 0x8d02,
    0xf9a0, 0xc2f7, 0x5048, 0xf366, 0x318e, 0xd9cf, 0x73f9, 0x1ead, 0xda40, 0x8a26, 0x5c6b, 0x055e, 0x46cf, 0x832c, 0xe83a, 0xded0,
    0x9fd2, 0x95d8, 0x6823, 0xe44c, 0xef9e, 0x7493, 0xd0ac, 0xe64b, 0x84e0, 0xa4c8, 0xca9f, 0x7dce, 0x270b, 0xed62, 0x1da4, 0x5e2e,
    0xdcab, 0xf3ed, 0x9949, 0x3748, 0xc215, 0x3a1f, 0x8653, 0xb3d6, 0x6ae3, 0x84a0, 0x6bcd, 0x46c3, 0x8ce8, 0x23f2, 0x4f56, 0xde36,
    0x9392, 0x9d35, 0x3263, 0x0a64, 0xd6ea, 0xbdd5, 0xfdb8, 0x0a2a, 0x223c, 0x63d8, 0x98f0, 0x34bf, 0x799f, 0x42e7, 0x1d3d, 0xb8c7,
    0x5bca, 0x578b, 0xa388, 0xfaf0, 0x0697, 0x8ce0, 0x8e87, 0x5238, 0xd76b, 0xca50, 0xb0f3, 0xbd42, 0x9562, 0x113d, 0xd71e, 0x5b29,
    0xca88, 0x1ed9, 0x7b0b, 0x8b6c, 0x83be, 0x41d9, 0x01ee, 0x479c, 0xe7ae, 0x1cd1, 0xc8ea, 0x8e70, 0x4749, 0x8a7d, 0xd608, 0xb38b,
    0xa28a, 0x9b74, 0x4e82, 0x5f6e, 0x3094, 0x03a2, 0x348e, 0x8d5c, 0x7d36, 0x501c, 0x6285, 0xb19e, 0x806a, 0xd5f1, 0x6367, 0x36d0,
    0x22cd, 0x9bba, 0xf274, 0xa36c, 0xa7c7, 0x19b9, 0xf68b, 0x5273, 0x5257, 0x1fe6, 0xf8b4, 0x3815, 0xbaf9, 0x1939, 0xca0f, 0x9829,
    0xcb52, 0x723a, 0x34a5, 0x2d8a, 0x37df, 0x565b, 0x68a2, 0x0da4, 0xfe67, 0x2f41, 0x817c, 0xf0b9, 0x700d, 0x644f, 0xc558, 0x5abe,
    0x76ee, 0x91a5, 0x8193, 0x3977, 0x5312, 0x0eb5, 0x524d, 0xc2b2, 0x507b, 0xddd1, 0x1f5e, 0x1471, 0xf4f3, 0x8b9c, 0xb0d4, 0x2cef,
    0x8056, 0x8eef, 0x4d14, 0x81b4, 0x86e0, 0x790a, 0x1133, 0xff49, 0x5677, 0xe376, 0xc205, 0xbb34, 0x08f0, 0x52fc, 0x46ee, 0xf0a1,
    0x4cc3, 0x7b4e, 0xd333, 0x55c7, 0xd3b5, 0xb9e0, 0x1c28, 0x7393, 0x7a6d, 0x9518, 0x3587, 0x0a73, 0xac07, 0x29d7, 0x5c7c, 0x160e,
    0x169a, 0xa938, 0x8941, 0xfee1, 0x2944, 0x1dc7, 0xff3f, 0x3e64, 0xd732, 0x2039, 0x18bd, 0xb836, 0x3da8, 0xe8ee, 0x7251, 0x3c36,
    0x6cd4, 0xb9b7, 0x1c32, 0xf678, 0xb5de, 0xa417, 0x528a, 0x1d29, 0xef85, 0x41f3, 0x1ffa, 0x040c, 0x0ad6, 0xc574, 0x77f4, 0x50e8,
    0xf76d, 0x897b, 0x8852, 0x8e3b, 0xe550, 0xadb7, 0xf593, 0xd937, 0xe988, 0xfc84, 0xf669, 0x84bd, 0xe825, 0xccff, 0x6878, 0xaf39,
    0x7b96, 0xba13, 0xc6bf, 0x72b3, 0x6282, 0x9e8a, 0xf8ae, 0x579b, 0x6fe0, 0x215b, 0xb883, 0x1564, 0x450b, 0xbbdb, 0xdbf3, 0x7635,
    0xa811, 0xbd05, 0x08fb, 0xb0f2, 0xad27, 0x2b44, 0x0d87, 0x6a07, 0x44dd, 0xd62d, 0xbb10, 0x07bc, 0x6d96, 0xe33d, 0x6fbb, 0xdc4b,
    0x536c, 0x5649, 0x113b, 0xd820, 0x8916, 0x5d60, 0xd94e, 0xf4dd, 0x3416, 0xa745, 0x19a7, 0xf650, 0x6e06, 0xf49d, 0xe29d, 0xfce5,
    0xe893, 0x28c5, 0x9b0a, 0x08ee, 0xd78e, 0x2dd3, 0x8bcf, 0x0390, 0x3740, 0x2d40, 0x6fa1, 0x471c, 0x41c7, 0xc788, 0xf4ff, 0x7694,
    0x231c, 0xfd59, 0xfb8d, 0xbe7f, 0x6090, 0x45ef, 0xbdc3, 0xed33, 0x0e4d, 0xfb69, 0x13cf, 0x71eb, 0xb5a2, 0x8cce, 0x9222, 0xb746,
    0x7481, 0xcabb, 0x0072, 0xf179, 0x9075, 0xc658, 0x386c, 0x3b50, 0xd268, 0xa812, 0xe83c, 0x3a0d, 0x97d1, 0x0bb8, 0xf695, 0x17c5,
    0x4a2b, 0xe390, 0x2011, 0x4331, 0xa405, 0x99d4, 0x82fc, 0xea6a, 0xeef0, 0x6edf, 0x7e83, 0x6f3d, 0x89a2, 0x9036, 0x63b7, 0xada5,
    0xc1ca, 0x9cec, 0x9e78, 0x8f5b, 0xfb26, 0x7eb2, 0xe464, 0xe6eb, 0x5eef, 0x2b32, 0x1db7, 0xb6eb, 0x6252, 0xfeec, 0xb0af, 0xf6dd,
    0xabd2, 0xda04, 0x13ae, 0x78f8, 0x95f4, 0x533b, 0xd4e5, 0xb4da, 0x0ea3, 0xe2b0, 0xd37f, 0x68ac, 0xdd45, 0x9158, 0xa751, 0xb508,
    0x7ad1, 0x1f37, 0xb69c, 0x6667, 0x38dc, 0x1db5, 0xa726, 0x676b, 0xe75b, 0x7409, 0x8934, 0xe7f1, 0xebe8, 0x29b5, 0xb9ce, 0x25dc,
    0x9632, 0x5e5b, 0x046c, 0xa342, 0x6e00, 0xeb48, 0x7d0a, 0x6a00, 0x32c0, 0x5e8f, 0x7a18, 0x3487, 0xe15f, 0x8261, 0xbbf2, 0x7be0,
    0x5c9d, 0x641c, 0x79bc, 0x48db, 0x01f8, 0xab62, 0x6d29, 0x8579, 0xbc89, 0x5210, 0x9f78, 0x8d04, 0xac9e, 0x6dbc, 0x4980, 0x5da9,
    0xdc25, 0xceb9, 0x51aa, 0x5c96, 0x9dd6, 0xa649, 0x1969, 0x4ba1, 0xa37b, 0xbbfe, 0x6563, 0x1301, 0x0aa5, 0x390f, 0x4ef4, 0xcab4,
    0xe03d, 0x85d8, 0xf8c5, 0xa8f3, 0x9d67, 0xddcb, 0x693d, 0x5a21, 0xa7f9, 0x79e5, 0x3b53, 0xf495, 0x551d, 0x1f9a, 0x6bd0, 0xe9db,
    0xc214, 0x3498, 0x55dd, 0x038f, 0x64cd, 0x5d9e, 0xa70c, 0xad67, 0x44a5, 0x6364, 0xa828, 0xe3f6, 0xc60c, 0xfa23, 0xb3f2, 0xb6cc,
    0x8a55, 0xf444, 0x0f12, 0xd141, 0x3bec, 0x4ce5, 0x1790, 0x2f18, 0x19ee, 0x7dda, 0x5d3a, 0x3abb, 0x23dd, 0x60a8, 0xae12, 0x02ec,
    0xef45, 0x9060, 0xaec8, 0x2454, 0xc7ba, 0x1660, 0x323f, 0xf0d2, 0x5f21, 0xd9bd, 0x5bbf, 0x5a62, 0xdfea, 0x9be1, 0xf07c, 0xd93d,
    0x0f44, 0x01de, 0xdedd, 0x285a, 0xdcd5, 0x4151, 0x07d3, 0x4a82, 0x1021, 0x10b2, 0xc517, 0x95f6, 0x85ab, 0xc3a6, 0x5b79, 0x3ed6,
    0x2653, 0x24a0, 0x24e0, 0x864b, 0x38f0, 0x5dd5, 0xa696, 0x5d42, 0x6a0f, 0x3bba, 0x6b52, 0xfabd, 0xee81, 0x75f1, 0xe748, 0x2b6c,
    0x98ae, 0xc15a, 0xe4dc, 0x0a07, 0x9669, 0x4db7, 0x55de, 0xa40b, 0xe6ed, 0x2eef, 0x16ee, 0xccee, 0x7333, 0xc9d6, 0xdda7, 0x9ee1,
    0x13f9, 0x2a26, 0xdd69, 0x649a, 0x0144, 0x7ce7, 0x32ee, 0xaddc, 0xc5f8, 0xf3a8, 0x7a84, 0x31e0, 0x5456, 0x4662, 0x0940, 0x09c0,
    0x4303, 0x6911, 0x7ba3, 0xfebb, 0xd8f5, 0x0dce, 0x19de, 0xa9e7, 0xbd06, 0x9dbe, 0xb57b, 0x941e, 0xd344, 0x1b4b, 0xabe2, 0x8e91,
    0xb78f, 0x1dda, 0xe4a4, 0x4d67, 0xfbbe, 0xb65f, 0x7cd5, 0x35f6, 0xeef3, 0x6eb9, 0x803d, 0x89db, 0x19bc, 0x0dbc, 0x815f, 0x4342,
    0x5dc3, 0x9b69, 0x7268, 0xdb4f, 0x0fa1, 0xcdd2, 0x2916, 0x9650, 0x50af, 0x3cec, 0xea2a, 0x4da5, 0xb3ad, 0x3158, 0x8be8, 0x0667,
    0xb9dd, 0x3dbe, 0x65f8, 0x4ddc, 0x0b52, 0xfdd4, 0x3669, 0x6cee, 0x215f, 0xbdd9, 0xfdc2, 0xa666, 0x7dde, 0x2dd7, 0x1dde, 0xeddb,
    0x61e2, 0x7664, 0xddde, 0x5a28, 0x2ebe, 0x3dd0, 0xbe93, 0xcdc0, 0xfcf0, 0xf9d8, 0xd40d, 0xf15c, 0xb64d, 0x8dd7, 0x5b6e, 0x6bbc,
    0xadd0, 0x1d65, 0x164e, 0xc5da, 0x674a, 0x6a21, 0x0e39, 0xb4a2, 0xed44, 0x413f, 0x823a, 0x878d, 0x3a66, 0xedd7, 0xe8c9, 0x93da,
    0x6817, 0x493b, 0x8275, 0xcbbc, 0x5d8c, 0x865d, 0x8ac0, 0x5f43, 0xe1a0, 0x05f4, 0xbd5e, 0xcb76, 0xbb6e, 0x71db, 0xe38d, 0x4cd3,
    0x340e, 0xf576, 0x4d2b, 0xe9b9, 0xbe3d, 0xddb9, 0xdf3b, 0x2c87, 0x37be, 0x1340, 0x9a09, 0xed07, 0xa2b5, 0xce8c, 0xa637, 0x515d,
    0x3a75, 0x59d9, 0xa395, 0xab50, 0x2ee4, 0x4dc9, 0x6c38, 0x503b, 0xeb36, 0x82fe, 0x2f4c, 0xbef1, 0x6979, 0x3eb7, 0x5cf1, 0x0dd4,
    0xd0b6, 0x24d8, 0xda80, 0x83ab, 0x9d2f, 0x0156, 0xc1e2, 0x7ea0, 0x0102, 0xd664, 0x5065, 0x1724, 0x99c2, 0xe406, 0x9ca8, 0x5be6,
    0xf626, 0x1da3, 0xf49c, 0xee80, 0x2369, 0x09d2, 0x0ed3, 0xba28, 0x3ddf, 0x26e9, 0x5329, 0x20ad, 0x3d93, 0x0cea, 0xb449, 0x6b24,
    0x5d4e, 0xab4d, 0x1e60, 0x706f, 0x1e94, 0x7bb5, 0x2d06, 0x4266, 0x1215, 0x2e7d, 0xa77e, 0x2dc1, 0x26a7, 0x6b67, 0x2421, 0x25a0,
    0x39ea, 0xe691, 0xb1ab, 0xdf9e, 0xb3dc, 0x9dd0, 0x45dd, 0x5891, 0xf0f8, 0x664e, 0x8ebe, 0x529b, 0x7c03, 0xc646, 0x262a, 0xf913,
    0x020b, 0xa81e, 0xdc03, 0x388f, 0xdf8f, 0xd5d3, 0x00ba, 0xe138, 0xce0e, 0x2f9a, 0x9c2f, 0x236a, 0x0914, 0x2647, 0xfcd2, 0xc263,
    0x343b, 0x5d9f, 0xb78c, 0x5914, 0x296f, 0x2d5e, 0x3d79, 0x458f, 0x0298, 0xc4db, 0x7514, 0xa047, 0x862a, 0xbdc9, 0x8a3d, 0xa94c,
    0xeebe, 0xabc8, 0x505f, 0x3e04, 0x6c62, 0xc49b, 0x9cf7, 0xc6af, 0x563c, 0xcce3, 0xe924, 0x7172, 0xe85d, 0x1e32, 0xba82, 0xb29b,
    0x6850, 0xc64e, 0x2184, 0x86f3, 0x3247, 0x7a1a, 0x74f7, 0xe9a4, 0x132c, 0x1ca7, 0xb858, 0x0414, 0x6a49, 0x7743, 0x50f9, 0x0d88,
    0xadf6, 0xe383, 0xed5a, 0x11c5, 0xf991, 0x9786, 0x99ea, 0xa789, 0x3841, 0x4692, 0xecae, 0x346b, 0xc758, 0x9233, 0xaf4f, 0xc4fd,
    0xeb58, 0x171a, 0xe932, 0xf2ea, 0xc1a6, 0x5138, 0x38c0, 0x3f9f, 0x11ac, 0x1767, 0xa57c, 0x073e, 0x32a3, 0xfd3d, 0x5a69, 0xcf4d,
    0x595f, 0xd8eb, 0x8e57, 0x5fdd, 0xa5dd, 0xa3d3, 0x8d19, 0x6b08, 0x3595, 0xb99a, 0x170c, 0xb891, 0x821e, 0xf8c2, 0x98fe, 0x2099,
    0x9a17, 0x3db4, 0x4ebd, 0xa78c, 0x88a1, 0xfdd0, 0x7a92, 0x977b, 0x3726, 0xd38d, 0x13dd, 0xc78b, 0x6571, 0x4a5f, 0x22a8, 0x5bcd,
    0x2ee7, 0x3270, 0xe325, 0x67cf, 0x4ea1, 0xdbb5, 0x191c, 0x734b, 0xf205, 0xe7c2, 0x7e94, 0x4aef, 0xf3dd, 0x926e, 0xa503, 0xc693,
    0x6b28, 0x0a0b, 0xea6e, 0x348b, 0x8d06, 0x5934, 0x0da8, 0xb83a, 0x61fb, 0x9252, 0xc6b3, 0xa266, 0x3afb, 0x7810, 0x1541, 0xde6a,
    0x1376, 0xc177, 0x98c8, 0x9232, 0x803c, 0x6f3c, 0xe7ad, 0xd06f, 0x7e60, 0xb008, 0xc198, 0x447f, 0x9535, 0x9ab9, 0x72c2, 0x617e,
    0x27e8, 0xa89d, 0x8c10, 0x6073, 0x1a6f, 0x9656, 0xbd4e, 0x8ca7, 0x21c8, 0x0b4e, 0x7130, 0xe5e7, 0xe91c, 0x6d85, 0x2477, 0x086a,
    0xadfc, 0x8e7d, 0x12d3, 0xfadd, 0xb320, 0xdb6f, 0x6bdc, 0xcb8b, 0xa433, 0x708f, 0x5c06, 0xf319, 0x5f63, 0xcd57, 0x7215, 0xbf11,
    0x077f, 0xa362, 0xcad4, 0x308e, 0x4aa2, 0x15ed, 0x1583, 0x3adb, 0xea8a, 0xbd31, 0x5843, 0x68cc, 0x3aa6, 0xf199, 0x76b4, 0x8dc1,
    0xd218, 0x08e6, 0xf43e, 0x85a0, 0x0a35, 0x5ccc, 0x4fad, 0xc116, 0xaa9e, 0x8744, 0x3f91, 0xa262, 0x8421, 0xf386, 0x3eff, 0x6220,
    0x57bb, 0x41e9, 0x86a7, 0x042c, 0xf2fa, 0x81d4, 0x3c56, 0xe3cc, 0xe128, 0x0a84, 0x5e4e, 0xde4a, 0x8d7c, 0xcb67, 0x5661, 0xf0d9,
    0x361d, 0x5c2d, 0x42e0, 0xbbe6, 0x047d, 0xf9b2, 0x3245, 0xf1e5, 0xb343, 0xf5d9, 0x09d3, 0xfa7e, 0xfca8, 0x5d24, 0xf4ec, 0x89cc,
    0x64ce, 0xb7ef, 0xf9c2, 0xa236, 0xc048, 0x0570, 0x0c74, 0x5932, 0xd01a, 0x2f81, 0xf417, 0xb759, 0x2861, 0x4407, 0x7ae6, 0x01bd,
    0xf1a1, 0x3665, 0xb1cf, 0x95bf, 0x3c6f, 0x3c80, 0x7e7c, 0x869a, 0xb8da, 0x2821, 0x5a5b, 0x4acf, 0x15c5, 0xef34, 0x6102, 0x9e2c,
    0xb065, 0x358f, 0x1339, 0x08da, 0xe729, 0xedb2, 0xdc67, 0x24cb, 0x6dda, 0x3769, 0x29d4, 0xbb76, 0xcf73, 0xce36, 0x6a08, 0x7724,
    0x9d82, 0x48f6, 0xc532, 0x60c3, 0x0e68, 0xfd00, 0xd500, 0xe3ab, 0x3a81, 0xed22, 0xda9b, 0x7bd0, 0x98c9, 0xaa02, 0x8c03, 0xf9f3,
    0xaa17, 0xafb6, 0x9c5f, 0x65f2, 0x758c, 0x2339, 0x30b7, 0xcbe5, 0x6db1, 0x84d8, 0x895c, 0x7925, 0x22e8, 0x47b7, 0x1d58, 0xa4e3,
    0xac2e, 0xf87e, 0xc494, 0xad43, 0xd9f0, 0x6156, 0x5b88, 0x9c81, 0x64ec, 0x8506, 0xfd2f, 0x8083, 0x9e3f, 0xb630, 0x4e9a, 0x774f,
    0x6c7d, 0x38aa, 0x1727, 0x924e, 0x21e3, 0xde85, 0x3c71, 0xa37d, 0x287c, 0xbb91, 0x9c7a, 0xdea0, 0x90c0, 0xb2ae, 0xcc5c, 0x350a,
    0x90a5, 0x132f, 0xf609, 0x030d, 0x6ed3, 0xbb49, 0x207a, 0xf00e, 0x820d, 0x13b1, 0x62bd, 0x1a29, 0x2493, 0xb38e, 0x9560, 0xa9f3,
    0xaeaf, 0x9c77, 0xd402, 0x7403, 0x9768, 0x69d2, 0x04e3, 0xfe3e, 0x58c2, 0xba68, 0x8369, 0x732b, 0x2177, 0x4a6e, 0x2b8b, 0x52fa,
    0x1404, 0x58b8, 0x6d90, 0x59a0, 0x559d, 0x6034, 0x5627, 0xb293, 0x713c, 0x7da3, 0x119e, 0xb256, 0x1d05, 0x7c31, 0x5f49, 0x33b5,
    0xe65c, 0x3f3b, 0x3f9e, 0x30b6, 0x9ceb, 0x5dc2, 0xee90, 0x4e81, 0x549d, 0x5695, 0xc8ab, 0xbeee, 0x9497, 0x3edd, 0xaba0, 0x61f7,
    0xb329, 0x8d0f, 0xa5e6, 0x3250, 0x6edc, 0xceea, 0x3c78, 0x21ec, 0xeac9, 0xc6db, 0xeb34, 0x6e42, 0x6c57, 0x3f45, 0xcc41, 0x80ad,
    0xb5e7, 0x86e9, 0xa7d0, 0x06a0, 0xcee1, 0x92f7, 0x79e7, 0xedb4, 0xfbc7, 0x9672, 0x1e9d, 0x2eed, 0x891f, 0xfb2f, 0x9ddf, 0xdcde,
    0xebd8, 0x5f59, 0x9d93, 0x3958, 0x80e5, 0x1dcd, 0x9875, 0x6e76, 0xc515, 0x34ef, 0x0730, 0x91c8, 0x446e, 0x6cea, 0xf202, 0xe305,
    0x49b6, 0x9248, 0x67dc, 0xcb24, 0x7799, 0x4eb0, 0x648b, 0x0716, 0xcd32, 0xb6e9, 0x8bc7, 0xdd13, 0x144a, 0x7972, 0xc946, 0xb462,
    0x1d5f, 0xa806, 0x06c5, 0x55a9, 0xc9c5, 0x93a4, 0x35b6, 0x5544, 0x0e1b, 0x0ed4, 0xef70, 0xfb4c, 0x8677, 0xea79, 0x8cbb, 0x2b77,
    0x02ee, 0x65f4, 0xa333, 0xad68, 0xc6d2, 0x34d1, 0x9198, 0x9515, 0xe4ed, 0x9a8e, 0xc479, 0xe01e, 0x2df0, 0xe0af, 0x41a1, 0x3b19,
    0x6098, 0xf857, 0x1b6f, 0xab27, 0xfb75, 0x8e99, 0xdc76, 0xaedb, 0xd79e, 0x1ba6, 0xeca0, 0xdf41, 0x9127, 0xd1db, 0xf6d2, 0xa4d0,
    0x9b28, 0x38b4, 0xb909, 0xacd3, 0xffa9, 0x114f, 0x1e73, 0x904b, 0x9f42, 0x1a80, 0x5b4a, 0x615e, 0x438e, 0xad28, 0x22b0, 0xd7d0,
    0xc41a, 0xf451, 0xa11e, 0x780c, 0xeac0, 0x271d, 0x3e23, 0x7ec6, 0xffa1, 0x40c0, 0x3e87, 0xbf43, 0x7f24, 0x605e, 0x80bc, 0xc178,
    0x9da6, 0xa01d, 0x76df, 0x97b8, 0xac13, 0xe65d, 0xb5bb, 0x1bf9, 0x445a, 0xc0d0, 0xbd8c, 0x9581, 0x900f, 0x10fb, 0xa8a3, 0x023d,
    0x5318, 0xe5ca, 0x4ae9, 0xafe8, 0xf888, 0x6bdf, 0xc817, 0x9f0b, 0x853b, 0xa93b, 0x4684, 0xf377, 0x282c, 0xaca1, 0x9d72, 0xc07a,
    0x5c22, 0x2a60, 0x336f, 0xf863, 0xe643, 0xf3ff, 0xfa51, 0x2bbd, 0xe275, 0x6c92, 0x5ace, 0x2f1f, 0xd22c, 0xa9bb, 0x2cbf, 0xb9aa,
    0x287b, 0xd38c, 0x744f, 0x2f1e, 0x700c, 0xfe79, 0x5b6d, 0x25db, 0x764e, 0xe560, 0xeeb6, 0x9212, 0x12e3, 0x0496, 0x4572, 0x3af7,
    0xa30d, 0xb302, 0xdba6, 0x34cb, 0xf97e, 0x2d9c, 0x0dd1, 0x0efc, 0xaf63, 0x7d65, 0xa121, 0xafc0, 0xee30, 0x0620, 0x7752, 0x770a,
    0x43d9, 0x9c66, 0xaea9, 0x960a, 0xf7d8, 0xca21, 0x6e2d, 0x1356, 0xfb15, 0x86ca, 0xc74a, 0x6fd1, 0x1c3d, 0x1ecc, 0x0248, 0x83f0,
    0xc534, 0xb3f4, 0x35c3, 0xaa2d, 0x6e39, 0x19cb, 0x09ff, 0x7826, 0x5e16, 0x399c, 0x4fa2, 0x14a3, 0xcc59, 0x3362, 0xd6c5, 0xd47f,
    0x9f72, 0xd82d, 0x74c3, 0xf3da, 0x95cb, 0x30a6, 0xc4c1, 0x979f, 0xd9d5, 0xd2e9, 0x148d, 0x5eb1, 0x48ca, 0x6322, 0x4900, 0x7e10,
    0x88df, 0x0ab9, 0x9a66, 0x6f1c, 0xb8fc, 0x36e2, 0x8720, 0x2d38, 0x9a2c, 0x8346, 0x3ac2, 0xe9eb, 0x05df, 0x4dd8, 0x929f, 0xbea4,
    0xaf20, 0xa13f, 0xafd5, 0x4f00, 0xeb2b, 0x7b1d, 0xd585, 0xdf0f, 0x710b, 0x9033, 0xc4ef, 0x5a53, 0xdfc3, 0xc442, 0x4d45, 0x613b,
    0xe23a, 0xde30, 0xc087, 0x0bea, 0x795c, 0x1ce3, 0xb32f, 0xf297, 0x4430, 0xff15, 0x8af3, 0xccab, 0x7893, 0x4d8c, 0x0790, 0xe78d,
    0xe807, 0x7340, 0xd1cb, 0xa87d, 0x6c4e, 0x8068, 0x422d, 0xd469, 0xba29, 0x4060, 0x1fd1, 0x6630, 0x5f92, 0x2e59, 0x97be, 0x502f,
    0xfa09, 0x276a, 0xa70d, 0x3dfe, 0xe33b, 0xbb46, 0x04c5, 0x153d, 0x36f8, 0x39fe, 0x40f5, 0x1058, 0x370e, 0x6d47, 0x1277, 0x4d08,
    0xc848, 0x4030, 0xfd14, 0xb15d, 0x4fc9, 0x525f, 0xa566, 0xb72c, 0x3b87, 0x4bde, 0x99dc, 0xd6a3, 0x0638, 0x3cff, 0x3b7c, 0x8bf0,
    0x366f, 0x0485, 0x02b6, 0x3107, 0xa954, 0x8bae, 0xac6a, 0x4a16, 0xe79d, 0xb6d3, 0x0ccd, 0x02be, 0x2b45, 0x2e8d, 0x1bae, 0xfbbb,
    0x693a, 0x3ddd, 0xd507, 0x7c9c, 0x1741, 0x3dba, 0xa1b3, 0xdaf8, 0xd999, 0x2da7, 0x1e3e, 0x84eb, 0x168a, 0xb777, 0x1377, 0x197e,
    0xf9d6, 0x5d02, 0xc3a8, 0x38ac, 0x3f3c, 0x3e76, 0xc857, 0x6f76, 0x18d5, 0xd75c, 0x177a, 0x8c87, 0x2cde, 0x220e, 0x14c0, 0x26de,
    0x5129, 0x18d9, 0x867b, 0x9f76, 0x8040, 0x3599, 0xcf77, 0x49ba, 0xad2b, 0xd76f, 0x9778, 0x2c9b, 0x64d1, 0x341a, 0xb3b1, 0x681b,
    0x02a9, 0xf3a2, 0x3a0b, 0xd1f5, 0x5703, 0x7b60, 0x940e, 0x1a4f, 0xc0e3, 0x5577, 0x7450, 0x83c4, 0xe0ea, 0x36a0, 0x3ba0, 0x3d27,
    0x3e5e, 0x9cb5, 0xd18a, 0x251b, 0xc2d9, 0xef97, 0x9a75, 0x2137, 0x61d6, 0xb9d9, 0xc72d, 0x3963, 0xa610, 0xc1a4, 0x57d7, 0x3bce,
    0x5fdc, 0xc493, 0xe5c9, 0x5128, 0x5125, 0xf68a, 0x533a, 0x0b51, 0x0396, 0x7734, 0x5c37, 0x77f7, 0x81d2, 0x49e3, 0x73af, 0x2457,
    0xa27b, 0x78f1, 0x538f, 0x1bd4, 0xcc38, 0x688a, 0xfd1a, 0xc8c3, 0x0cc1, 0x928f, 0xade8, 0xb03b, 0x1812, 0x55d6, 0x4839, 0x0c72,
    0xce66, 0x006c, 0x539c, 0x6d65, 0x94ab, 0xadc9, 0x94e3, 0x6582, 0x01b1, 0x2a1f, 0x8ee4, 0x0d41, 0xc141, 0xc3d5, 0x4e7f, 0x393b,
    0xd558, 0x2c94, 0xc979, 0x9fbf, 0x49f4, 0x6294, 0x91dc, 0x21a8, 0x52b5, 0x88dd, 0x9ebe, 0xac23, 0x41bf, 0x9eb7, 0xe4b4, 0xb7f9,
    0x82dd, 0xf729, 0x27ac, 0x6dd4, 0x8a92, 0x7647, 0xa473, 0xb615, 0x2a5e, 0x1b9f, 0xc7f0, 0xde66, 0xbcf1, 0x00f2, 0xd087, 0xe966,
    0x8f4c, 0x2284, 0x335c, 0xdaa2, 0x7e05, 0x090d, 0xfc23, 0x8b5c, 0x0161, 0x9ab2, 0x11b7, 0xe5c7, 0xc59c, 0x3623, 0xdf50, 0x1ef2,
    0x9e24, 0xe2fe, 0xac30, 0xdfec, 0x80a4, 0xd63f, 0xe2d6, 0x3561, 0x5fb1, 0xa86c, 0x3105, 0x7379, 0x5fff, 0x8bfc, 0x4b37, 0x843e,
    0x2206, 0xeff3, 0x8380, 0x2ffd, 0xf5ce, 0x5bfa, 0x4874, 0xeaa9, 0xbc2a, 0x543c, 0xf79c, 0xafc6, 0xe25e, 0x7ddb, 0xee6d, 0x1b35,
    0x496a, 0x4377, 0x1851, 0x3522, 0x7d9a, 0x612f, 0x87fe, 0x0103, 0xaa38, 0x7d6c, 0x1d48, 0x2faf, 0xc042, 0x786a, 0xb677, 0x2bdb,
    0x7637, 0xafea, 0x68f0, 0xb884, 0x3e2d, 0x4e05, 0x205f, 0x7c2e, 0x705a, 0x410e, 0x12c5, 0x6e22, 0xe6aa, 0xb2fc, 0xe972, 0xc164,
    0x8a44, 0xe1fc, 0x93cb, 0x50a2, 0x3ca2, 0xa63d, 0xe223, 0xaf7d, 0x94f2, 0x055f, 0xbf6f, 0x8ca3, 0xa6ee, 0x48b3, 0x9c8e, 0xb2d4,
    0x0b54, 0xaaa0, 0x8f35, 0x65b0, 0x7133, 0xbd6f, 0xf025, 0x035a, 0xc577, 0xbcda, 0x7165, 0x5f4a, 0xef48, 0xf281, 0x034a, 0xbb2e,
    0x198d, 0x086b, 0x3f26, 0x4e03, 0x037f, 0xd90a, 0xff88, 0xbfef, 0xcf4a, 0x5b5a, 0xe6e0, 0x8813, 0x5466, 0xa7bf, 0xa588, 0xcc21,
    0x5721, 0x1bf1, 0xdcb2, 0x959a, 0x6a5a, 0x0621, 0xe056, 0x5f07, 0x6eb8, 0xeeef, 0x8e6f, 0x03e2, 0xb776, 0x7f23, 0xf9f2, 0xaf4e,
    0xa219, 0xb5c5, 0x497d, 0x3f25, 0xd995, 0x44d2, 0xbfc7, 0xe1b4, 0xad14, 0xba34, 0x24aa, 0xd15e, 0x7fd8, 0x6ab0, 0xf4f9, 0xa611,
    0x3371, 0x6fbd, 0x263b, 0x4896, 0x8f37, 0x691b, 0xb04e, 0x9977, 0xe193, 0x96fa, 0x141b, 0xa556, 0x8179, 0xfc91, 0xc821, 0x4e0b,
    0x3a6a, 0xb793, 0xd792, 0x19f2, 0xc898, 0x3292, 0xd6ee, 0x6fe4, 0x4472, 0xf1a5, 0x88a5, 0x21cc, 0x05e3, 0x02f2, 0x1745, 0x61da,
    0x1201, 0x1433, 0xee51, 0x11bd, 0xb269, 0x6eb5, 0x0d3e, 0x95a7, 0x0321, 0x87f7, 0xb312, 0x0ae5, 0x9346, 0x4095, 0x78d3, 0xb4b2,
    0x5af6, 0x7c21, 0x13a2, 0x77d6, 0xb24d, 0x4492, 0xb26d, 0x6ebc, 0x2da3, 0x707a, 0xf5ee, 0x22b3, 0x5486, 0x58db, 0x5dcf, 0xa239,
    0x77b6, 0xdb2b, 0xed1a, 0x8cef, 0xa1cf, 0xd0ef, 0xb533, 0x495f, 0x7e49, 0xb964, 0xacfb, 0x4257, 0x10d5, 0x16a7, 0x3ef4, 0xa085,
    0x2a30, 0xae64, 0x54f4, 0x1314, 0x28e1, 0x840a, 0x8332, 0x97ee, 0x5efa, 0x40bd, 0xcef5, 0xfa5b, 0xc25d, 0xeb9c, 0x0768, 0x69a7,
    0x0a86, 0x3dd2, 0x49d0, 0xcbed, 0x1195, 0xb23d, 0xc760, 0xf7a9, 0xeacf, 0x18e1, 0xcb7d, 0x52db, 0x5ad6, 0xc727, 0xb07b, 0xa5c6,
    0x7f5e, 0xa255, 0xeea7, 0x5a90, 0x908a, 0x4645, 0x4704, 0xbd4a, 0x8bd7, 0x8613, 0xd67a, 0x70ca, 0x1ad9, 0x75f9, 0x892c, 0x7471,
    0xbd7d, 0xf518, 0x7cd7, 0x5c08, 0x1cfc, 0x6929, 0xd0fd, 0xa188, 0xfa96, 0x93e1, 0x1903, 0x0e5c, 0x19ef, 0x6cb3, 0xda6d, 0x6937,
    0x9587, 0xd847, 0xf219, 0x92d7, 0xcfb1, 0xbf95, 0xd665, 0x06ac, 0x3d53, 0xf134, 0xf2c6, 0x18cd, 0x9920, 0xfe98, 0x9545, 0x6a73,
    0x84e7, 0x036e, 0x1565, 0x760e, 0xd62b, 0x91a2, 0x2ba5, 0xbfa2, 0xe48f, 0x0bcc, 0x7207, 0x1d98, 0xbc7c, 0x6b39, 0x1de4, 0x27d5,
    0xb0bb, 0x0961, 0x0c08, 0x4537, 0xdb8c, 0x7d34, 0x4c61, 0x972b, 0x5c6c, 0xa9d8, 0xe106, 0x31d4, 0xb249, 0x89d7, 0xfaea, 0x79c7,
    0x84c9, 0xc0f9, 0x17c3, 0x51d0, 0x256b, 0x19e1, 0x9bb2, 0x82ba, 0x1413, 0xf454, 0x33b6, 0x0680, 0x21b8, 0x9e42, 0x94c4, 0x43ad,
    0x2478, 0x47f5, 0x64b9, 0x497e, 0x7c28, 0x91bb, 0xcb3b, 0x2c35, 0x14e8, 0x0ee9, 0xc83d, 0xd393, 0x1a7a, 0x4732, 0xf3b3, 0x65ce,
    0x8dd5, 0x2126, 0xc576, 0xf453, 0xee31, 0x474f, 0x56ca, 0xb5c7, 0x3334, 0x0af8, 0xcd49, 0x2fda, 0x44c6, 0x9491, 0x12a4, 0x1a6b,
    0x35c0, 0x3d91, 0x00c1, 0x2123, 0x481c, 0xc688, 0xacc3, 0xb373, 0x9e77, 0xdb4e, 0x76d7, 0x9b73, 0xb5ba, 0x6f75, 0xc1a5, 0x2338,
    0x0bd4, 0xefa5, 0x62a2, 0x913f, 0x3dc8, 0x93d3, 0x769a, 0x8076, 0x272b, 0x0939, 0x2756, 0x93b2, 0x0301, 0xfe87, 0x30b4, 0x1e7d,
    0x9794, 0xdd3e, 0x33f7, 0xd5e1, 0xb243, 0xdbc3, 0xdb7d, 0x5ee2, 0xe941, 0xbb57, 0xcef8, 0xd1ae, 0xfd0e, 0xfa1c, 0xc984, 0xf9c0,
    0x0ac5, 0x3d63, 0x68ce, 0x9652, 0x5f40, 0x1a0e, 0xdcf5, 0x239a, 0xc5e1, 0x0ec3, 0xa425, 0x9e64, 0x41e7, 0xd069, 0x344e, 0x74a1,
    0xa91a, 0x6a2f, 0x0164, 0x64a9, 0xb66d, 0x7dc7, 0xdb72, 0x5de3, 0x99e2, 0x3580, 0x8944, 0x5d6e, 0x269b, 0xeb56, 0x5dac, 0x64e1,
    0x0658, 0xebd1, 0x9da8, 0xe827, 0x7dbd, 0x18f5, 0x5723, 0x238d, 0xe8a6, 0x0181, 0x4a14, 0x7279, 0x81f2, 0x48ef, 0xe36b, 0xce86,
    0x7598, 0x766e, 0xf7f8, 0x9c36, 0x78b3, 0x3888, 0xefbf, 0x88ff, 0x7f44, 0x98c1, 0xdc80, 0x5338, 0xd251, 0x9f62, 0xc6f2, 0xcd18,
    0x78bd, 0x3861, 0xa5fd, 0xe80f, 0x6a69, 0x25d4, 0xe026, 0x345b, 0xf3fd, 0xdc6f, 0xf30b, 0x1396, 0x1e3a, 0xe148, 0x4ac2, 0x1837,
    0x448e, 0x8039, 0x6773, 0xb349, 0x33ac, 0x58e2, 0x9d0b, 0x7de6, 0x4075, 0xb8fa, 0x049d, 0xdcbe, 0x2308, 0x628d, 0x3733, 0x6c9d,
    0x4876, 0x787b, 0xcd96, 0x9228, 0x1e75, 0x18bf, 0x3f6d, 0xa1c9, 0x0eb2, 0xcb18, 0x77cb, 0xb805, 0x5af2, 0x433e, 0xe67e, 0x3abc,
    0x197a, 0x28e7, 0xcc8e, 0x3c4c, 0xd2fd, 0x5066, 0xf11f, 0xfdf7, 0x974d, 0xa467, 0xcc95, 0x4605, 0xcfbb, 0xe5ba, 0xbba8, 0x122b,
    0x1b11, 0x6fe1, 0x173e, 0x2f90, 0x3ec7, 0xfe56, 0xd58f, 0x3f81, 0xcea4, 0x202d, 0x5835, 0xec3f, 0x3351, 0x59e3, 0xb2cd, 0x67bc,
    0xec54, 0x362e, 0x2501, 0x3299, 0x5997, 0x1ab0, 0x6f6e, 0xefce, 0x29fa, 0xbb62, 0xd24a, 0x8a27, 0xca28, 0x105e, 0xa4dd, 0x69b7,
    0xa8da, 0x3c25, 0xa150, 0x070c, 0x56dd, 0x3d45, 0x0812, 0x79a6, 0x5abd, 0x1d06, 0x8dd6, 0xebe7, 0xde9f, 0x13dc, 0x5576, 0xe274,
    0xb5c6, 0xe055, 0x0417, 0x6d86, 0xf828, 0xe069, 0x04c8, 0x10f3, 0x68fb, 0xf7c5, 0xda07, 0x06f6, 0x7eac, 0x09fc, 0x474c, 0x27e4,
    0x642b, 0x0dfc, 0xb933, 0x47ad, 0x6d87, 0x6913, 0x7766, 0x770b, 0xe082, 0xcdb0, 0xbd23, 0xca07, 0x1293, 0xf767, 0xed0e, 0xc7db,
    0xffbe, 0xfe23, 0xc889, 0xb339, 0xb02e, 0x8b44, 0x376f, 0x7779, 0xf580, 0xe53a, 0x0d28, 0xecba, 0x6efb, 0x57d8, 0x3e30, 0xd4c2,
    0x8093, 0x2e19, 0x9b3c, 0xfb42, 0xae94, 0xfe8a, 0x23bb, 0x4945, 0x0c9c, 0xcbb9, 0xc282, 0x1aca, 0xc4cb, 0x6429, 0xe71d, 0xebab,
    0x1fa5, 0xd2bb, 0xf1ac, 0xa899, 0x58af, 0x468a, 0x60da, 0xdcca, 0x42ab, 0xe0c9, 0xbcbb, 0xb79b, 0x8159, 0x86d1, 0x275e, 0xc926,
    0x2e16, 0x0105, 0x3a49, 0x9c5c, 0x0a75, 0xaedd, 0xd696, 0xd2b3, 0x26c0, 0xd405, 0x3a98, 0x066d, 0x753f, 0xd482, 0xc54c, 0x2991,
    0x4deb, 0x3051, 0xa6c8, 0x7952, 0xba89, 0x5bac, 0xdb96, 0xef1a, 0xb193, 0x1a14, 0x2af2, 0xbbaf, 0xcd63, 0x6c19, 0x4d99, 0x7c68,
    0x7c1d, 0x815b, 0x673a, 0x26d4, 0x13fb, 0x9537, 0xba45, 0xcd12, 0x7ac9, 0x1193, 0xd3e7, 0x9846, 0xd9a5, 0x102e, 0xcfe0, 0x2c8e,
    0x1884, 0xa969, 0x1d6f, 0x1fc7, 0x05c6, 0x225d, 0xf6f9, 0x55ee, 0xbd6d, 0x872a, 0xff61, 0xaac1, 0x1373, 0x856a, 0x3847, 0x7564,
    0x6455, 0x72f3, 0x3928, 0xd635, 0x30f6, 0x0cfd, 0x9399, 0x3e3c, 0x96da, 0x5bee, 0x8db3, 0xdcf3, 0x3bf4, 0x73e8, 0x2350, 0x0b7a,
    0x9f1f, 0xa6a1, 0xa50b, 0xa271, 0x60bb, 0x8a01, 0xda01, 0x69da, 0x5e1e, 0x1b05, 0xa186, 0x0b85, 0x9807, 0x1bdc, 0xf98b, 0x303d,
    0xf553, 0x1099, 0xdf34, 0xb0e8, 0x828f, 0x069e, 0xd8a2, 0x4a53, 0xbeb9, 0x0d25, 0x7da0, 0x606f, 0xd7f4, 0x4273, 0x5d3b, 0x0b9e,
    0xaa8d, 0x53c2, 0x6ad6, 0x1c1e, 0x1725, 0x63c3, 0x99cd, 0x444e, 0xf082, 0x4651, 0xc7b3, 0x90e1, 0xfe61, 0x2575, 0x5765, 0x274e,
    0x215c, 0xa1f3, 0x2993, 0x5012, 0x561e, 0x611f, 0xde6c, 0x0a09, 0x5357, 0x17e4, 0x1575, 0xd2a6, 0xab57, 0xc3a0, 0x4f86, 0xea5b,
    0x7ffa, 0x4a3b, 0x325c, 0x2701, 0xc867, 0x4b5e, 0x684e, 0x9afe, 0x02d2, 0xea4c, 0xda41, 0xe2e5, 0xffe7, 0x87cc, 0x3970, 0x640c,
    0x7fd7, 0x6f74, 0x3e2f, 0x400e, 0x1686, 0xcfa3, 0xc6d4, 0x5679, 0x7c32, 0x52df, 0x64e5, 0x2127, 0x4452, 0xe8d6, 0xebaf, 0x0710,
    0xe2d4, 0xa21a, 0xe91d, 0x503e, 0xbcb0, 0x0597, 0xccd4, 0xb85f, 0x77d2, 0x19b8, 0xd4e4, 0x6ced, 0x595e, 0xf87d, 0x4ae8, 0x9f75,
    0x21ac, 0x6634, 0x0241, 0x34cf, 0xe3d0, 0x0418, 0x7753, 0x59a4, 0x7397, 0x3819, 0x15df, 0xf36a, 0x857d, 0xb6ef, 0x2b70, 0x83af,
    0x380d, 0xfc98, 0x6e37, 0x7567, 0xb28a, 0x073b, 0xb770, 0x6776, 0x1d16, 0xe69b, 0xc595, 0x7d29, 0x3bcf, 0xa76d, 0x3369, 0x400f,
    0x7124, 0x4c9a, 0x6683, 0x4d9b, 0x5594, 0xd839, 0x24e2, 0xa505, 0xb773, 0x8d2c, 0x6d13, 0x3938, 0x8816, 0x0ddb, 0xc750, 0x841b,
    0x76fe, 0x7f66, 0x4fe5, 0xe73e, 0x139e, 0x0db8, 0x7990, 0x2510, 0x5b9b, 0xaaf6, 0x4551, 0xba4d, 0xa3bf, 0x4287, 0xa762, 0x71b1,
    0xf994, 0xc555, 0x4755, 0xe687, 0xd772, 0x8775, 0x576e, 0xebb8, 0xf502, 0xe97b, 0x0771, 0xc82a, 0xfaf3, 0x12ad, 0xc98d, 0xe374,
    0x4cd9, 0x54e9, 0x6bb4, 0xbe33, 0xf757, 0x95e3, 0xb36d, 0xee3b, 0xe852, 0x5a46, 0xcf8a, 0xa997, 0x58a7, 0xfda4, 0xd769, 0xeada,
    0x566a, 0x72cb, 0x5a72, 0xfcdb, 0xaba9, 0xf20b, 0x7aef, 0x8c0c, 0x2cc8, 0xf6db, 0x92a8, 0x457b, 0x1bb7, 0xb3ba, 0x73b8, 0xe4bd,
    0x6fc4, 0x5c85, 0x6370, 0x1dad, 0x602b, 0x7310, 0xb737, 0xe777, 0x5b77, 0x0949, 0xb452, 0xe8d2, 0xf69e, 0xa75a, 0x4989, 0xb3fb,
    0x56f3, 0x08aa, 0x4826, 0xa63f, 0x8d42, 0x3317, 0xddd3, 0x93a6, 0xc708, 0x567f, 0x3080, 0xc9d4, 0x3538, 0x2d00, 0x876c, 0xd4f8,
    0x7f8d, 0x66e5, 0x834e, 0x0f3a, 0x605b, 0x0e74, 0x74fe, 0xc981, 0x6228, 0x3f74, 0x6977, 0xe8f4, 0xc878, 0x77a1, 0x367c, 0x9855,
    0xbfcd, 0x25a7, 0x30e4, 0x4004, 0x948e, 0x4529, 0x3fb6, 0xd6c2, 0xea9a, 0x60a9, 0x9caa, 0xed5c, 0x7e29, 0x7804, 0x5f30, 0xc88b,
    0xe210, 0x4f2c, 0xe165, 0x99c3, 0x13e9, 0x63a2, 0x754f, 0xa5a1, 0x6f51, 0x2542, 0x9094, 0x75b7, 0x66be, 0x5e0a, 0x981a, 0x05b4,
    0x4237, 0x6a97, 0x80d1, 0x5675, 0x62e2, 0xba77, 0x028b, 0xdbf4, 0x525e, 0xfb74, 0x8699, 0x9cf6, 0x2a25, 0x231b, 0x0a63, 0x5cb9,
    0xb55d, 0xcb4a, 0xca4e, 0x589d, 0xea4b, 0x29f9, 0x31d3, 0xbf6e, 0xae82, 0x87dd, 0x32ba, 0xde18, 0x1aec, 0xded1, 0x589e, 0x21c4,
    0xc285, 0xc350, 0xecc5, 0xfded, 0x239d, 0xb0ad, 0x57f0, 0xf816, 0x8280, 0x0b17, 0xc26e, 0xf82e, 0x56cb, 0xac3d, 0x633f, 0x119f,
    0xa3b9, 0xb01c, 0x8b99, 0xa146, 0x3ed4, 0xe5e8, 0xe1b5, 0x9477, 0xf603, 0x74b0, 0x6d75, 0xb4eb, 0xae6b, 0x6a8c, 0xdd36, 0xa659,
    0x1e63, 0x7d66, 0xe06a, 0x6c0f, 0x844a, 0xa2de, 0x28d4, 0x7331, 0x54a0, 0x553e, 0x41db, 0xd2eb, 0x2d9f, 0x35f2, 0xfd9b, 0x8615,
    0xdaf4, 0x312a, 0xab7a, 0x96d0, 0x3fe1, 0x04cf, 0x3eb5, 0x045b, 0x1687, 0x6513, 0x8d20, 0x61d7, 0xc367, 0x5985, 0xe39a, 0x6196,
    0x6cbe, 0x1f41, 0xf8fb, 0x138c, 0xd9db, 0x7d26, 0x7e5d, 0xb646, 0x5582, 0xa7ce, 0xa570, 0x0ce3, 0x3609, 0x2db4, 0xf8d9, 0xf2ad,
    0x493f, 0x315c, 0xa749, 0x5da2, 0xc933, 0xf745, 0xca54, 0x2b48, 0x924c, 0xce3a, 0xb99e, 0x6f40, 0xd831, 0xea7d, 0xd760, 0xf68e,
    0x7076, 0x7cd1, 0x10dd, 0xc0ef, 0xab97, 0x2c25, 0xa0e8, 0x8907, 0xa18e, 0x3708, 0xf2ec, 0x6b26, 0xe2ad, 0x08b2, 0x47af, 0x6019,
    0x28eb, 0x856e, 0x8d30, 0xcfa7, 0x0372, 0xe14c, 0x707e, 0x44d6, 0x312e, 0x6049, 0xc64c, 0x5015, 0xa1af, 0x6045, 0x7cf4, 0xee70,
    0xc80c, 0x7b25, 0x9c19, 0xa22f, 0x4b3f, 0x4c53, 0x560c, 0xeb6c, 0xdb0b, 0x42a0, 0x9a2e, 0x3096, 0xfc46, 0xc855, 0xead1, 0x3f97,
    0x827d, 0xc340, 0xfcc1, 0xcb73, 0xda0e, 0x5e97, 0x2a89, 0x57b4, 0xfbee, 0x7ed9, 0xd3bd, 0x1713, 0x355f, 0x7d8d, 0x16fd, 0xac74,
    0x0984, 0xb278, 0x1b8c, 0x6125, 0xecfa, 0xa1d9, 0x9720, 0xe63c, 0xa84d, 0x74ce, 0xe3be, 0x36db, 0xf932, 0x2fce, 0xbac8, 0xc6d0,
    0x2ad1, 0xaf3f, 0xc449, 0x0b4a, 0x61ee, 0xb8a0, 0xc7a2, 0xbc9e, 0x7285, 0x8959, 0xcbb6, 0xa79c, 0x1674, 0xeba3, 0x19c9, 0xac63,
    0xf5bc, 0x0dfa, 0xdb1a, 0xa22a, 0x2ab2, 0x79b9, 0x7fe3, 0xfc41, 0x23de, 0x89a8, 0x07c8, 0x7d88, 0x7915, 0xd7dd, 0x0e26, 0xfcbc,
    0x7c1b, 0xff1c, 0xe407, 0xac5e, 0x568c, 0xd928, 0x3e1b, 0x2acc, 0x83ea, 0x4e3e, 0x2b07, 0xb273, 0xa539, 0x3c90, 0xb96b, 0xbac3,
    0x0880, 0xc861, 0x62e1, 0x5010, 0x173d, 0x5011, 0x7636, 0x036d, 0x5275, 0x5a55, 0x5653, 0x2c20, 0x7121, 0xfa5d, 0x5a3d, 0xf2e7,
    0x87a3, 0xd983, 0x6681, 0xb641, 0x8312, 0xc3fd, 0x82cd, 0x557d, 0x22af, 0xfbba, 0x6a48, 0xce35, 0xe83b, 0x941d, 0x8f68, 0xca4f,
    0x12f4, 0x7fe6, 0xa6fc, 0x5898, 0x5494, 0xb23b, 0x2435, 0x1ae7, 0x26a9, 0x5961, 0x50bf, 0x2316, 0xc23f, 0xb5c8, 0xb257, 0x80cc,
    0x58b5, 0xbf7f, 0x5110, 0xc886, 0x7131, 0x3bdd, 0xfff5, 0xbfc8, 0x8f25, 0x6f09, 0xca36, 0x4f27, 0xcd71, 0xcb30, 0x186d, 0x9815,
    0xaf64, 0x9901, 0x1183, 0xf829, 0x68e4, 0x7c9f, 0x4863, 0x2398, 0x0e8a, 0x9078, 0xcb59, 0xe5e3, 0x2a10, 0x84a3, 0x7a31, 0x6d70,
    0x7f77, 0xc375, 0x1afa, 0x0456, 0xa1bd, 0x75d0, 0xd0fb, 0x1682, 0x7b3b, 0xcfa4, 0xb9da, 0x5539, 0x792b, 0x7939, 0xe849, 0x28cf,
    0xfd63, 0x480a, 0xd00d, 0x500b, 0xced5, 0xa9ca, 0x85be, 0x711c, 0x8af5, 0x68a4, 0xee1f, 0x9418, 0xacfd, 0xc44f, 0xa98e, 0x667c,
    0x5189, 0xa6d7, 0x71de, 0xbabe, 0xe2f2, 0xf71a, 0xa157, 0x7c16, 0x0836, 0x4ec4, 0x21ef, 0x0df5, 0x2559, 0xb14d, 0xc4f2, 0x0e21,
    0xe17c, 0x1b51, 0xb7a3, 0x4f22, 0x46e2, 0x305c, 0xd619, 0x712c, 0x409d, 0x9176, 0xe11a, 0xb236, 0x550e, 0xdb7a, 0x271a, 0x50ba,
    0x1cea, 0x8f41, 0x8a04, 0x2393, 0xbee5, 0x6da9, 0x7f47, 0x0e85, 0x575a, 0xdfae, 0x601c, 0xcf9f, 0x7b2d, 0x10be, 0x5e68, 0xd0f6,
    0xc14f, 0x8c18, 0x78a6, 0x600d, 0x7dab, 0xe0f8, 0x2b53, 0xc238, 0x801b, 0xd23a, 0x439c, 0x7014, 0xcc67, 0x7019, 0x245f, 0x78a1,
    0xa41f, 0x657f, 0x6a57, 0x6012, 0xe92a, 0xcac5, 0x1dfc, 0x8d8a, 0x94a5, 0x339a, 0xdfa6, 0x1458, 0xc23d, 0x90ce, 0xcf81, 0x5f29,
    0x8d8f, 0x67b6, 0x52a2, 0xb231, 0xc8a2, 0xbc65, 0xc27a, 0x46dd, 0x3db6, 0xc648, 0xde3c, 0x6da4, 0x3c27, 0x701b, 0x9570, 0x6017,
    0x6987, 0x145d, 0x6540, 0x7c11, 0xf5ea, 0xb65b, 0xd352, 0x0831, 0x331d, 0xebf6, 0x97df, 0x689f, 0x552b, 0xd88d, 0x5f2e, 0x85b9,
    0xcdcb, 0x5591, 0x3f9c, 0x4891, 0x8a1c, 0x1d8a, 0xbbca, 0x8174, 0xa235, 0xb78b, 0x2769, 0x02ed, 0xb3d5, 0x309b, 0x4db6, 0xd78d,
    0x7d87, 0x9ca9, 0xc00a, 0xa234, 0x6936, 0xee6c, 0x4272, 0x5af1, 0x0389, 0xd118, 0x1a86, 0x142e, 0xeb71, 0xcf13, 0xb364, 0x78ce,
    0x57b9, 0xdbe7, 0xfd24, 0x70c5, 0xee87, 0x450c, 0x0881, 0x9085, 0x6d26, 0x01e8, 0x3f83, 0xb238, 0x4c82, 0xae2e, 0x4591, 0xcb78,
    0x8974, 0x1718, 0x44f1, 0x495a, 0xa2f9, 0xece0, 0x9d11, 0x7e44, 0x8c33, 0xc295, 0x6697, 0x40b8, 0xcb4b, 0xb9f5, 0xac79, 0x832d,
    0x1622, 0x1efe, 0xf562, 0x3f20, 0x29cd, 0xe481, 0xac68, 0x7fd3, 0x7324, 0xa7a1, 0x9348, 0x7f1e, 0x8b1f, 0x713d, 0xee32, 0xdcad,
    0xbd2a, 0xa04d, 0x2ba8, 0xbb29, 0x44d3, 0x4b1b, 0xb808, 0x0b4f, 0xbca3, 0xaf0d, 0x7c94, 0x0866, 0x371f, 0xd17a, 0xb01f, 0xa583,
    0x10f4, 0xc617, 0x98df, 0xafc1, 0xe641, 0x9440, 0x3286, 0xf5c9, 0xd1a6, 0x3139, 0x8736, 0x612a, 0x788c, 0x1c74, 0x106e, 0x1d43,
    0x46a2, 0x2a51, 0xe771, 0xaf78, 0x4e78, 0x36e0, 0x4ddf, 0x94ed, 0x4d01, 0xc72e, 0xc6d5, 0x4109, 0x906a, 0x6031, 0x376c, 0x205a,
    0x33f4, 0xc3d8, 0xb4ca, 0xf44e, 0x9ce2, 0x6b2b, 0xad37, 0x44c1, 0x9a7f, 0x579e, 0x601e, 0x6f70, 0x29bb, 0xa82b, 0x823c, 0x00bc,
    0xf8f0, 0x4e66, 0xa51a, 0x65c9, 0x890c, 0x00a4, 0xa1a7, 0x2473, 0xcbdd, 0x679d, 0xe62f, 0xc0f4, 0xb419, 0x60ea, 0x997d, 0x94bf,
    0x8a0a, 0xaee6, 0xe072, 0x18c8, 0x95ec, 0x3320, 0x63cc, 0xcfac, 0x44db, 0x4e0e, 0x8413, 0x6924, 0x7d3d, 0x4758, 0xdbcc, 0x18fe,
    0x932e, 0x2eaf, 0xd99f, 0xbf9d, 0x4eea, 0x4ee1, 0xee75, 0xe48a, 0x75d9, 0x501a, 0xcace, 0xa9d3, 0x2a02, 0xa2e7, 0xf74e, 0x4c5c,
    0x81dd, 0x6f45, 0x5141, 0xd5dc, 0x5dcb, 0x1dd6, 0x0579, 0xfd09, 0xf408, 0x8ea2, 0x36eb, 0xfe82, 0x8bb7, 0x35a2, 0xf693, 0x629d,
    0x2b4d, 0xb9e9, 0x03ab, 0x749c, 0x5db9, 0xaee3, 0x34a2, 0x0ac0, 0x3dd9, 0x7cf0, 0x09db, 0x6a2a, 0xc661, 0x5344, 0xab6b, 0x5da7,
    0x70aa, 0x3f1a, 0x7366, 0x1391, 0x5153, 0x4ed8, 0xa062, 0x6a64, 0x9263, 0x7a02, 0x6212, 0x58dd, 0xb64b, 0xdab6, 0x95da, 0x0498,
    0x39b7, 0x776d, 0xf2b2, 0x88fa, 0x8eb4, 0x06e0, 0xf392, 0x7f3f, 0x9cd0, 0xfd35, 0xb814, 0x017c, 0x6d62, 0x0ce8, 0x38c7, 0x571e,
    0xe20f, 0xff1b, 0xc009, 0x4009, 0x7d99, 0xbf94, 0xf11e, 0x444d, 0xc823, 0xc00b, 0xae13, 0xf878, 0xd6c7, 0xa38a, 0xbe2a, 0xe918,
    0x5be7, 0x0974, 0xc890, 0x400a, 0x1440, 0xce77, 0xffd2, 0x3808, 0xce0d, 0xf5d8, 0xef6f, 0x662f, 0x5ab6, 0xed61, 0xe29c, 0x2b6b,
    0x7f1c, 0x75bc, 0x3641, 0xe2e0, 0xbbdc, 0xd493, 0x9681, 0xc862, 0xcec3, 0x0af5, 0x4f9f, 0x611a, 0x10ce, 0x4c67, 0x05b9, 0x1570,
    0xa5a6, 0x6210, 0xd674, 0x4a4e, 0x30ad, 0xbed3, 0xf330, 0xbeb4, 0x27ce, 0x124c, 0xeb25, 0x464c, 0x4855, 0xb55e, 0x46d0, 0x99c8,
    0x7c98, 0xa1ab, 0xd03d, 0xbe2e, 0xcb5d, 0xd61d, 0xc44d, 0x58a2, 0xbf73, 0x4708, 0x68d2, 0x12a8, 0x7da4, 0x7af3, 0xf1b0, 0x4750,
    0x8dfb, 0x7fbe, 0x870b, 0x8416, 0x7e56, 0xd996, 0x21c9, 0x711f, 0xdbed, 0xde1d, 0x1846, 0x7f61, 0x5482, 0x4d63, 0x6bab, 0xa75d,
    0xc7f4, 0x04c9, 0xa122, 0x4576, 0x3f95, 0x9cfb, 0x172b, 0xaba4, 0x18c1, 0x68a6, 0x5cbe, 0x730b, 0x7a1c, 0x8300, 0xe4e0, 0xb44d,
    0x2aa0, 0x998c, 0x159a, 0xc97c, 0xdbf9, 0xfd99, 0xfc2d, 0x6223, 0x3964, 0xdef9, 0xd2da, 0x567a, 0x7c91, 0x85e2, 0x34b2, 0xddce,
    0xcbcd, 0x9155, 0x5e65, 0x9c57, 0x7336, 0x0360, 0xd959, 0x753a, 0xf37a, 0xa47d, 0x7879, 0x6c14, 0xd503, 0x6041, 0xab85, 0xa6c3,
    0x58d7, 0xe4a0, 0x1f71, 0xc921, 0x3f32, 0xd2f0, 0x01cd, 0x1fa0, 0xd9c9, 0xfa73, 0x861a, 0x2e14, 0x07ed, 0x099a, 0xcae3, 0xe718,
    0x0eec, 0x7a2b, 0xece8, 0xaabc, 0xb031, 0x2ea6, 0x619b, 0x05c1, 0x400c, 0x61dc, 0xd20a, 0x9532, 0x0a66, 0x83f2, 0x54e0, 0xd3e2,
    0x824d, 0x6d0b, 0xbc54, 0x3e37, 0x4b2d, 0xe9c8, 0xf7cd, 0x96d5, 0x0460, 0x4824, 0x99b3, 0x1b00, 0xaf56, 0x4187, 0x4200, 0xd9fc,
    0x947c, 0x6608, 0xd039, 0x6d81, 0xe653, 0x1557, 0xc12d, 0x7ea7, 0x0838, 0xd2ff, 0xb1f8, 0x13d7, 0x37c0, 0x6c64, 0x6919, 0xa14b,
    0x808b, 0xb4f0, 0x8aa3, 0xc7d6, 0x1d55, 0x9a1f, 0x62d0, 0x6426, 0xb21d, 0xe353, 0x2216, 0xfe1e, 0x91e6, 0xea39, 0xa65e, 0x3e2b,
    0x573b, 0x2aa7, 0x11a4, 0xec3a, 0xe783, 0xeec9, 0x3cac, 0x3ec2, 0xbb05, 0x53ee, 0x8592, 0x1aab, 0x238b, 0xf833, 0xca8f, 0xd245,
    0x8e01, 0x3fcf, 0x385b, 0xfdf2, 0xc740, 0x9325, 0x7181, 0x9748, 0xf949, 0x11ed, 0x8438, 0xcb13, 0xf81b, 0x56c8, 0x4cd0, 0x3f68,
    0xefe6, 0x088d, 0x1224, 0x3002, 0x3383, 0xf445, 0xcf14, 0xac01, 0xcde2, 0x20e2, 0x1d76, 0xd208, 0xeaae, 0x781c, 0x4d92, 0xbc4e,
    0xd667, 0xe631, 0x1b3a, 0xaf8d, 0xa568, 0xa5d1, 0xc871, 0x15a5, 0x7406, 0xb136, 0xf876, 0xe117, 0xd6c8, 0xafcb, 0x8e23, 0xd0b7,
    0xc9b3, 0x2fb4, 0x0c0e, 0xd911, 0xd700, 0xf644, 0x9e70, 0x8ef9, 0x5a3e, 0x9261, 0x98ba, 0xc6c0, 0x6be6, 0xe0a5, 0x2be0, 0xccd0,
    0x0108, 0xf367, 0x21c5, 0xb004, 0x0304, 0x848c, 0xfb63, 0x6c2d, 0xa79f, 0x5ce4, 0xb42a, 0x9e0c, 0x62d3, 0xff97, 0xbf68, 0x3527,
    0xcd4a, 0x596e, 0xeb19, 0x5628, 0x9358, 0x8dc7, 0xdaed, 0x50a7, 0xaf82, 0x794a, 0xc339, 0xbe06, 0xcf2a, 0xda98, 0xe0c6, 0x5a3b,
    0x261d, 0x7045, 0xbab7, 0xdd5a, 0x95b9, 0xb4c1, 0xb2d9, 0x4512, 0x91ed, 0x8ca8, 0xd15f, 0xd295, 0x87c6, 0x94d9, 0x667a, 0xb8ea,
    0x87f3, 0x2912, 0x3801, 0x2801, 0xf600, 0x6e27, 0x8557, 0x878a, 0xaad2, 0xaa93, 0xc169, 0x0439, 0x1084, 0x2d9d, 0xf7c6, 0x6802,
    0x4289, 0x4f2e, 0x91af, 0xf96c, 0x7c33, 0xfd5b, 0x8ead, 0xc2da, 0x6ffa, 0x158d, 0x4b14, 0xb889, 0xc853, 0x3704, 0xa66d, 0x0d77,
    0x66ae, 0x654d, 0x5b61, 0x3a47, 0x5f0c, 0x4741, 0x4fb7, 0xe525, 0x084b, 0xdd85, 0x65b6, 0x959f, 0x43ce, 0xa942, 0x4e4f, 0x20f7,
    0x6c3c, 0xd411, 0x9226, 0xaecc, 0x1326, 0x03e7, 0x4f5a, 0x8856, 0x79eb, 0xf41b, 0xaf53, 0xe329, 0xd589, 0xeca4, 0x3ba4, 0x53a0,
    0x5904, 0x56f1, 0xc600, 0x89c1, 0x3f06, 0xc3cf, 0xa616, 0xf181, 0x4f5e, 0xd163, 0x802e, 0x384e, 0x031d, 0x964c, 0x4c91, 0x7c79,
    0x6f72, 0xa18a, 0xc991, 0x0245, 0xd101, 0x4a18, 0x1749, 0x3f2a, 0xe1b9, 0xb9a2, 0x2463, 0xdb1e, 0x172f, 0xd20e, 0x38cb, 0x44f5,
    0xbff4, 0x0e02, 0xbc47, 0x5113, 0x909c, 0x56bc, 0xaef2, 0x205d, 0xc2c7, 0x945e, 0x7520, 0xbebc, 0x2cdb, 0x7bc6, 0x4c8a, 0x4e08,
    0xbfcf, 0x8818, 0x6fb0, 0x3c60, 0x7483, 0x9499, 0x9975, 0xab01, 0x7b58, 0x96ad, 0xa8e2, 0xf5b1, 0xf3c4, 0x7adc, 0xcc26, 0x6cf5,
    0x05f3, 0xbc88, 0xbb33, 0xb85b, 0x49e2, 0xee2f, 0x52f9, 0x1540, 0xa0fc, 0x8299, 0xd061, 0xabd5, 0x11d6, 0x5f4f, 0xe8b9, 0x8a80,
    0xd866, 0x4170, 0x7df3, 0x65b5, 0x18f3, 0x33eb, 0x7b9d, 0xb922, 0x4c99, 0x8092, 0x913e, 0x263a, 0x035f, 0x9ce1, 0x711b, 0x7e5c,
    0x6590, 0xd9e8, 0xa08a, 0x356f, 0x8a56, 0x1a5d, 0x4a24, 0xeb72, 0x0fbf, 0x2bcb, 0x9059, 0xb7ed, 0x7834, 0x425c, 0x802a, 0xf2a5,
    0x52c8, 0x9789, 0xe9b2, 0x8cf4, 0x8cb5, 0xad2e, 0x652b, 0xe3da, 0x4e8f, 0x7697, 0xe65a, 0x0724, 0x4964, 0xa38b, 0x24d9, 0xebc4,
    0x97f3, 0x778a, 0x0a23, 0xa446, 0x2071, 0x1a23, 0xb9c1, 0x1ebb, 0x3e72, 0xf2e8, 0x72b4, 0x6a15, 0x0b34, 0x0db2, 0x5246, 0x1319,
    0x5049, 0xfa60, 0xeadc, 0x589f, 0xb30e, 0xcdce, 0xa9f5, 0xd822, 0x86a5, 0x6779, 0x3b5e, 0x4cb7, 0x5a2f, 0xe6e3, 0x69ac, 0x4a90,
    0xdf7d, 0x2fdb, 0xb294, 0x4673, 0xc054, 0x44b8, 0x7476, 0x5e55, 0xd3ee, 0x70cf, 0x15fd, 0x295d, 0x4ede, 0xa8e9, 0xa4fc, 0xf688,
    0xd4ac, 0x96e5, 0xdb8e, 0x75db, 0x0115, 0x73d1, 0x6c50, 0x5a95, 0xbd4f, 0x3b06, 0xb629, 0x24ab, 0x3150, 0x3235, 0xa952, 0x5d17,
    0x98f6, 0xf288, 0x4b00, 0x521c, 0xf7ae, 0xc8c0, 0xd992, 0xc194, 0xf258, 0xf096, 0x9aab, 0xcbf2, 0xf97f, 0x2d36, 0xa9c2, 0x68fc,
    0xbdf6, 0x888f, 0x6fca, 0x8985, 0xf005, 0x52e0, 0xef98, 0xe709, 0x1926, 0xe5a3, 0xa5cb, 0x0593, 0xfa4f, 0x8998, 0xef69, 0xaa75,
    0xa105, 0xe1c2, 0xaf8b, 0x740f, 0x6eca, 0x0aea, 0x0fc8, 0xbd58, 0x5df1, 0x36af, 0xb4b7, 0x7df4, 0xba1d, 0xb381, 0x9739, 0xcecf,
    0xee49, 0x489c, 0x80d3, 0xc98f, 0x95ac, 0x6784, 0x9b0c, 0x2b8d, 0x76fb, 0x7787, 0xefdc, 0x11c2, 0xef28, 0x6bc3, 0x1cc9, 0x69e8,
    0x96e3, 0xb19c, 0x5ac6, 0x9756, 0xf50b, 0x6231, 0xbec2, 0x77db, 0x6ec1, 0x94fb, 0x7e52, 0x447b, 0xe498, 0x9e80, 0x2734, 0x7f4d,
    0xbb0e, 0x0469, 0xbf7c, 0xce16, 0x44e4, 0x9cd9, 0xa23e, 0xbcac, 0x0e93, 0x22b8, 0x8024, 0x083f, 0x5267, 0x1690, 0x558b, 0xfbf7,
    0xaaa7, 0x21d1, 0x384a, 0x02a1, 0x7145, 0xcd3b, 0xb34c, 0x6dba, 0x8544, 0x9f4b, 0xd9de, 0xaf6c, 0x3b90, 0xc0ec, 0x61df, 0x2a67,
    0x6fe9, 0xd73b, 0xe7b7, 0x6aec, 0xbb40, 0xda49, 0x97cf, 0x757a, 0x2168, 0xbd0f, 0x010b, 0xe1a9, 0x0e56, 0xe764, 0x32c9, 0x19f7,
    0xd438, 0xc2e8, 0x6c3b, 0x489b, 0x3f38, 0x6b22, 0x3c5d, 0xb930, 0xbcba, 0xba4c, 0x4471, 0xbb56, 0x997c, 0xe717, 0xd830, 0xb14c,
    0x046b, 0xc5d9, 0x4e10, 0x91a4, 0x5b6c, 0x2136, 0x4ea0, 0xbb48, 0x0ae1, 0x0f9d, 0xa028, 0xc036, 0x2c12, 0xa55b, 0xa032, 0x08be,
    0x20cb, 0xd1b3, 0x3b68, 0x5d7a, 0x78cf, 0x9b65, 0xeef6, 0xd142, 0x6738, 0xc0d7, 0xd7d3, 0x8475, 0xe956, 0x8b04, 0xf9c5, 0x265f,
    0x5ee7, 0xae48, 0x54be, 0x0550, 0x13a8, 0x2ed2, 0x4f17, 0x2e4c, 0x5cfe, 0x47ab, 0x8f1b, 0xb126, 0xc361, 0xda81, 0xbe2b, 0xd5e6,
    0x76bb, 0xd429, 0x6cb6, 0x9144, 0x9d1d, 0x5795, 0x1b14, 0x56a5, 0x927a, 0x7b97, 0x7122, 0x27b9, 0x807b, 0x11e7, 0x8d23, 0x2357,
    0xded2, 0xd1f7, 0x1e82, 0xc2f8, 0x629f, 0x51d2, 0x757c, 0xa01a, 0x36a6, 0xb3ca, 0x6536, 0xa1f1, 0x6a3a, 0x93b7, 0x4c8d, 0x0c54,
    0x31b5, 0x559e, 0x3335, 0xee17, 0x8204, 0x9e69, 0x0132, 0xc43c, 0x1bd1, 0xe51e, 0x74a6, 0xa216, 0xf023, 0xd8e3, 0x4885, 0x5a8a,
    0x38de, 0xcd34, 0x07a7, 0xda32, 0x239f, 0x2cca, 0x7fba, 0x72be, 0xba35, 0x9114, 0x7e1f, 0x9657, 0x04f7, 0xf7a7, 0x027f, 0x1fab,
    0x7ef8, 0x2eac, 0xf271, 0x541f, 0xdc92, 0xc384, 0x302a, 0x64ae, 0x5de8, 0x321e, 0x0b40, 0x0d4e, 0x06f7, 0xe601, 0x1cfa, 0x0efd,
    0x9d3f, 0x7260, 0xf774, 0xa4e9, 0x7680, 0x9a76, 0x64e6, 0x0f8f, 0x6354, 0x5d73, 0xa0de, 0x7a9c, 0xfbac, 0x5742, 0xb76a, 0x1a0c,
    0xb1f6, 0xcadb, 0xc7a8, 0xedeb, 0x99f4, 0x6f67, 0x6ca2, 0xe2d0, 0x4171, 0xdcc3, 0x2e9c, 0x7dfa, 0x6e98, 0x5e7b, 0x392f, 0xf3f7,
    0x867d, 0x7309, 0xd439, 0x831e, 0x64bb, 0xab6d, 0xe426, 0xb34e, 0x7deb, 0x9b89, 0x8df7, 0x617a, 0x7d07, 0xb283, 0x835d, 0x3bda,
    0x03c2, 0x47ee, 0x9a7d, 0x2f61, 0x3460, 0x9d55, 0xed82, 0x0628, 0xe664, 0x8f0f, 0xe90e, 0xe814, 0x9eaa, 0x4487, 0x9dc4, 0x4213,
    0xd051, 0xc317, 0xf706, 0x01e6, 0x1a20, 0x139b, 0xa786, 0x2c04, 0x6dee, 0x351b, 0x183c, 0x7431, 0xe82d, 0x408d, 0xf761, 0xa0ab,
    0x160d, 0x74a9, 0xce8b, 0x0aa4, 0xb255, 0xc197, 0x928e, 0xfb14, 0xb4ae, 0x5dbf, 0x7763, 0xaafe, 0xa3f3, 0x727e, 0x9b44, 0x46b2,
    0xfbf6, 0x38ca, 0x47d7, 0xe82c, 0xf9d2, 0x6015, 0x1953, 0x2841, 0x5de2, 0xb26c, 0x95e2, 0xba88, 0x2392, 0x8d2f, 0x6d0a, 0x932d,
    0x8904, 0x008c, 0x4a03, 0x2ebb, 0x62b4, 0x46c9, 0x7e27, 0x9ad2, 0x7b80, 0xe711, 0x085c, 0xd77c, 0x108c, 0x7360, 0x3d1f, 0x9c3b,
    0x34f1, 0x533d, 0x7c75, 0x1aa0, 0x094b, 0xe5ea, 0x607e, 0x08b0, 0x7f03, 0x0ad9, 0x4dac, 0x019d, 0xca41, 0x9063, 0xcd1d, 0xe580,
    0x2c3a, 0x37cd, 0x8707, 0x9ab5, 0x248a, 0xb365, 0x0f13, 0xb323, 0x6315, 0xf96a, 0xa7b5, 0xfee4, 0x45b3, 0x026e, 0x214c, 0x4983,
    0xb951, 0xd398, 0xe466, 0x1e9f, 0xd3a5, 0xabb3, 0x28d6, 0x3082, 0x6fae, 0x4349, 0xbc20, 0x5194, 0x83ac, 0x32c6, 0x65d3, 0xe919,
    0x3174, 0x3c18, 0x43b2, 0xc3db, 0x9bc4, 0x626c, 0xd6d8, 0x5511, 0xba14, 0x9691, 0xbd40, 0xfa5e, 0xec64, 0x0685, 0x09b0, 0x7501,
    0xef8c, 0x1aed, 0xf9a1, 0x51d5, 0x9e54, 0x29b2, 0x2717, 0x4e92, 0xb430, 0x7d1e, 0xee47, 0xc203, 0x82bf, 0xb7c0, 0x880d, 0xf950,
    0x6035, 0x2eb3, 0xeecd, 0x0af9, 0xb5cc, 0x480e, 0x5e9b, 0x2546, 0x786e, 0xae68, 0x93d7, 0xf458, 0xc3a4, 0x08ae, 0x5bb0, 0xe53e,
    0x4091, 0x7264, 0x6270, 0x3180, 0xb385, 0x2fdf, 0xa5d5, 0x96b1, 0x6674, 0xad15, 0x1a70, 0x31f9, 0x7fb8, 0x6250, 0xd571, 0xf4cc,
    0x8c00, 0x0489, 0x6be3, 0x86ce, 0xcd5b, 0xa822, 0x233d, 0xba6c, 0x5300, 0x9b78, 0x9648, 0x3b26, 0x3913, 0xda08, 0x0dd2, 0x6652,
    0xa5f1, 0x7244, 0xf6e8, 0x5d04, 0x2138, 0x2932, 0xdab8, 0x2128, 0xb378, 0x8838, 0x9d01, 0xac4d, 0xc3ef, 0xcaf2, 0xd3a3, 0xdda5,
    0x38a8, 0xe2a9, 0x1c69, 0xb91a, 0xfaa8, 0x3d83, 0xfea7, 0x453c, 0x9730, 0xd867, 0x89f7, 0x48d0, 0x476f, 0x449e, 0x1ee3, 0xf474,
    0x2963, 0xb5e5, 0xa7df, 0xc2e9, 0x5c1a, 0x8233, 0x79cc, 0x412e, 0x44b2, 0x31d9, 0x2e0c, 0xf1c5, 0x9342, 0xdb4b, 0xc747, 0x14d8,
    0xe7e5, 0x3071, 0x86f1, 0xd711, 0x9557, 0x1d9d, 0x0319, 0x5c0e, 0x8b64, 0x1607, 0x27da, 0xf7e5, 0x0053, 0x789b, 0x5a03, 0x25f0,
    0x63e3, 0xed99, 0x6e44, 0xea6c, 0xbfa7, 0x6654, 0xe8f6, 0x045d, 0x4d6e, 0x5ca5, 0x77c1, 0x7613, 0x8795, 0x47d8, 0x540c, 0x8d4c,
    0x3f05, 0x6230, 0xed81, 0x5c0d, 0xd63d, 0x00b3, 0x3796, 0x68c6, 0x9345, 0xd068, 0xc54b, 0xe373, 0xa18d, 0x9175, 0x8412, 0x9531,
    0x00c4, 0x1dc6, 0x693c, 0x503a, 0x27e7, 0x3f3a, 0x35c2, 0x6d64, 0xcec6, 0xa06d, 0x6051, 0x9b7e, 0x452c, 0x0e61, 0x71a0, 0xb7ab,
    0xe608, 0x18d2, 0xa553, 0x6533, 0x0c1a, 0x6ab7, 0x7824, 0xf547, 0x051d, 0x317c, 0x6065, 0x632f, 0xa1f9, 0xd551, 0x6a78, 0x42c0,
    0x06b1, 0x147d, 0x90ee, 0x814e, 0xa9ea, 0x7448, 0x14ba, 0x9196, 0xc41d, 0xab20, 0x4ade, 0x4e5e, 0xb633, 0x8006, 0x84c3, 0x92dc,
    0x7efb, 0x4ce6, 0xd119, 0xe447, 0xa8ec, 0x4970, 0x1803, 0x2706, 0x9b03, 0x8460, 0x9bd7, 0x23ed, 0x6c7b, 0x918c, 0x9ece, 0x9944,
    0x5dbc, 0xad11, 0xb038, 0x5b24, 0xebf9, 0xa19e, 0x6411, 0x5bc5, 0xc824, 0xe2ea, 0xa7ef, 0x9d30, 0xe68a, 0x86e7, 0x7987, 0x1d38,
    0xe549, 0x9b22, 0x8b80, 0xf0b4, 0x04da, 0xd2ab, 0xc713, 0x37da, 0x2084, 0xe96c, 0xea60, 0x19b4, 0x5654, 0x6246, 0x2182, 0xf8af,
    0xc144, 0x37ad, 0x91f3, 0x4797, 0x0a0e, 0x1eae, 0xde19, 0xe7a9, 0xf8b1, 0xd713, 0x9b00, 0x5017, 0xe3f9, 0x630b, 0xf1e7, 0x3489,
    0x3a9f, 0x0956, 0x226d, 0xb0ed, 0x12a5, 0x246a, 0x616f, 0x6d91, 0x80a2, 0x00db, 0x82f4, 0xbbd6, 0x4a58, 0x2f57, 0x2507, 0xc6ba,
    0xc229, 0x752a, 0x0ba3, 0x50e3, 0x771d, 0xedca, 0x1f1b, 0x6ccf, 0x2b84, 0x3e74, 0x269d, 0x8976, 0xc187, 0x6074, 0xa612, 0x6873,
    0x430f, 0x90e6, 0x7978, 0x146c, 0x0d3a, 0x3ce8, 0xe0b6, 0x530d, 0x40ee, 0xb303, 0x09fd, 0x7905, 0x93be, 0xc0cd, 0x2753, 0xc200,
    0x4453, 0x61c6, 0xe9d5, 0x3e5f, 0xfe35, 0x9b95, 0xde7d, 0xd72d, 0xd758, 0xa0e4, 0x7ccb, 0x9513, 0xff0e, 0x04ed, 0x59fd, 0x1c23,
    0xb864, 0x024e, 0x5631, 0xaf96, 0x975f, 0x91ad, 0x3578, 0x75e4, 0x5428, 0xc301, 0x0aad, 0x8327, 0xc3e4, 0x5d0d, 0xb923, 0x5043,
    0xed0b, 0x6cf2, 0xf17d, 0x3eda, 0x3c5e, 0x9ee8, 0xe450, 0x50ec, 0x6e46, 0xf1e9, 0xf2ee, 0xde6e, 0xccaf, 0x904f, 0x9f7a, 0x0c76,
    0xd63e, 0x795b, 0x0715, 0x3c55, 0xe690, 0x0f43, 0xb0f1, 0x5047, 0x95a3, 0x50ab, 0x8cf8, 0x19fb, 0x7617, 0x212c, 0x9148, 0x9c3f,
    0xec43, 0x3e40, 0xbe37, 0x4013, 0x18d1, 0x8903, 0x489a, 0xbb32, 0xf832, 0xb64a, 0x6016, 0xbac7, 0x567e, 0x96d9, 0x1395, 0xcb7c,
    0x85a9, 0x607c, 0x11ce, 0x591d, 0x59a9, 0xcb2d, 0xbbef, 0x65fb, 0xaff1, 0xacdc, 0xf3e3, 0x34d4, 0xb166, 0xd1fe, 0x2524, 0x6ddd,
    0x72bc, 0xfeea, 0x8b75, 0x3751, 0x69c9, 0xf36f, 0x4c0a, 0xee9a, 0x4de5, 0xfec4, 0x83b4, 0xcbc5, 0xbe88, 0x6670, 0xa34b, 0xd14a,
    0x49a6, 0xd69d, 0x5cef, 0xbfa5, 0x1750, 0x009b, 0x4014, 0x77ce, 0x1512, 0x7d2e, 0xb82c, 0x85e5, 0xc4fa, 0x56e7, 0x0daf, 0xa3bc,
    0x3947, 0xd0cb, 0xabb1, 0x9edf, 0x203f, 0x62f5, 0x16d6, 0x756c, 0x677b, 0xbdb2, 0xdbe9, 0xd06b, 0x2abe, 0x18e9, 0x229b, 0x49e5,
    0x3bed, 0xd30a, 0xa6cf, 0x038a, 0x9f31, 0x65c0, 0x985a, 0xc607, 0xe1dc, 0xe8f9, 0xc3cb, 0x60a3, 0x13d5, 0xe32c, 0xe735, 0x0f0d,
    0xb49f, 0x14eb, 0xbf2f, 0x3ed1, 0x0b97, 0x8b47, 0xfc18, 0x0f3f, 0xc986, 0xc00c, 0x0157, 0x905b, 0x483b, 0x5cbc, 0x2a36, 0xf077,
    0xbc6b, 0x6e5b, 0x53b3, 0xf490, 0x93ab, 0x838c, 0x93f6, 0x9d62, 0x7200, 0x79f1, 0x1533, 0xa644, 0x1776, 0x2c21, 0x579c, 0x655e,
    0x6eb1, 0xea26, 0x4d0e, 0x69fb, 0x73fa, 0xc9d9, 0x9a48, 0x32bb, 0xd6fd, 0x4687, 0xd4fd, 0x520b, 0xb95d, 0xe3ae, 0x3a41, 0x6d24,
    0xa4b1, 0x57e5, 0xe4c2, 0xf174, 0x1385, 0x1a6c, 0x59a1, 0x97cc, 0x80ca, 0x22f8, 0x9029, 0x8cc9, 0x03f3, 0x4580, 0x490e, 0xfb88,
    0xaf5d, 0x4329, 0xac89, 0xfce0, 0x5600, 0xa511, 0x7223, 0x5367, 0xb048, 0x956e, 0xcc4f, 0x28c0, 0x8c11, 0x8a66, 0x4fdc, 0xf4fa,
    0xe77c, 0x4401, 0x1842, 0x6f38, 0xd3f9, 0x2607, 0x0c89, 0xa400, 0xa30e, 0xb0e2, 0x7802, 0x7ead, 0xd616, 0x6c75, 0x53e3, 0x1db2,
    0x461e, 0xe8d7, 0x9cb6, 0x6766, 0x816d, 0x39d0, 0xfac4, 0xe756, 0x63c5, 0xce3c, 0x918e, 0xe2ab, 0x3c82, 0xbc00, 0xb400, 0xd4e0,
    0xfa2b, 0xba52, 0x36c5, 0x6495, 0x26d2, 0x0edb, 0x936e, 0x5451, 0xc939, 0x31f5, 0x0566, 0x1b46, 0x0610, 0x993a, 0x71b6, 0x7b9e,
    0x2515, 0x8eec, 0xf55f, 0x9edc, 0x9c6e, 0xb931, 0x2532, 0x98a9, 0xfa16, 0x71c4, 0x9d78, 0x249b, 0x491c, 0x2693, 0xb842, 0xe743,
    0xe0d4, 0x00b4, 0x2abd, 0x4da0, 0x4dab, 0x4e5d, 0x4c98, 0x0f9c, 0xf391, 0x9747, 0x61ed, 0xb65a, 0xa50a, 0x0f39, 0x7f5d, 0x8038,
    0x4d44, 0x1ef1, 0x8420, 0x6ce9, 0x5bbe, 0x2dc0, 0x3d69, 0x215a, 0x4893, 0x1e7f, 0x0726, 0xf9d3, 0x83dc, 0x393d, 0x9b52, 0xbe8e,
    0x0358, 0x299e, 0x9fc2, 0xee7b, 0xaea6, 0xc82f, 0x3f02, 0x3d8e, 0x0bfb, 0x30c2, 0xe379, 0xe401, 0x94d2, 0x28b6, 0x9d6a, 0xda7b,
    0xcafa, 0xc75e, 0x73c6, 0x259b, 0xebbd, 0x3032, 0x987f, 0x5d49, 0x5584, 0x8291, 0x2965, 0xe68c, 0xa7fb, 0xe72b, 0xcfee, 0x2625,
    0x8c83, 0xab93, 0x6927, 0xed02, 0xf1be, 0x4c2f, 0x85c1, 0xbe38, 0xee40, 0x03b3, 0xa258, 0x4dc4, 0xd307, 0x824a, 0xf6a1, 0x2f47,
    0x634d, 0x8254, 0xd5e9, 0x5f3e, 0xe0db, 0xf8e7, 0xeadf, 0xe19b, 0x877d, 0xa99c, 0x246d, 0x413a, 0xb265, 0x4da1, 0x76f5, 0x0e34,
    0x142f, 0x8be4, 0x7b3e, 0x2f19, 0x216e, 0x0672, 0x4b1e, 0x12de, 0x0f58, 0xae53, 0x2996, 0x061b, 0xd524, 0x2c2b, 0x1b38, 0xdba1,
    0x05d0, 0x09c7, 0x3b93, 0xd47a, 0xd2b8, 0xc9b0, 0x008f, 0xc52f, 0x610f, 0xc1e3, 0xae14, 0x9c61, 0x14bc, 0x7ccd, 0xbaca, 0x0243,
    0x7840, 0xfdc8, 0x343e, 0xcca6, 0x6860, 0x2d22, 0x2e90, 0x7957, 0xef1f, 0x59ca, 0x7e86, 0x7b18, 0xd4aa, 0x6283, 0x5276, 0xc4ea,
    0xaae2, 0xca7c, 0xc940, 0x979a, 0x87de, 0xb410, 0x7c6d, 0xd9d0, 0x7a74, 0xbbb4, 0x56ed, 0x8341, 0x07ba, 0xc5d7, 0xa3b6, 0x871b,
    0x3502, 0xb7a0, 0x1f34, 0xf85e, 0xd806, 0x1405, 0x44c7, 0xd227, 0xfd7c, 0xd1ba, 0xe424, 0xac9c, 0x437e, 0x2ff3, 0xc92b, 0x4ae4,
    0xdccf, 0x8757, 0x6ba7, 0xc173, 0x4a65, 0x51ec, 0x311e, 0xc415, 0xe3b8, 0x8528, 0x0bb6, 0xa018, 0x6ab1, 0xff7e, 0x6719, 0xa89e,
    0x4fbe, 0x7234, 0x9ac5, 0xfb47, 0xc7c5, 0x60e1, 0xbb9c, 0xc9c0, 0x27e5, 0xb447, 0xe7b4, 0x34cc, 0x494a, 0x87ed, 0x427e, 0xc474,
    0x6b83, 0xd18b, 0xebb0, 0x9046, 0x53d4, 0xd56d, 0x8c97, 0x9f3d, 0x6bba, 0x2930, 0x4bb5, 0x1ba1, 0x899a, 0x1acf, 0x9442, 0xdc71,
    0x324f, 0x12d2, 0x2c93, 0x9f71, 0x1d28, 0x9e34, 0x0155, 0x64cc, 0x1cc0, 0x4722, 0x06cd, 0x369b, 0x33ec, 0x984b, 0x992c, 0x3a06,
    0x259a, 0x8b74, 0x4922, 0x26d9, 0x7579, 0x9974, 0x3f39, 0xf9d1, 0x1457, 0xd3bc, 0xe352, 0x3dd8, 0xcd17, 0x0767, 0xa759, 0x1372,
    0x55f3, 0xd8d7, 0x3797, 0x1053, 0x2b82, 0xe930, 0x4d1f, 0xe336, 0x7d4c, 0x4e72, 0xf3cf, 0x8063, 0xd169, 0x058d, 0x3cb7, 0x1fcc,
    0x64a1, 0xaac6, 0x57fd, 0xb727, 0x042a, 0xbdb0, 0xc2a6, 0x3b82, 0x2842, 0xf4c8, 0x60c5, 0xb6ce, 0x7907, 0xf549, 0x7569, 0xac65,
    0x4b2a, 0x65bd, 0x2895, 0x5123, 0xbcc2, 0x94b6, 0x3042, 0x81cd, 0xe61e, 0x0b8a, 0x1c59, 0xc19f, 0x11fd, 0x0663, 0x71a8, 0xd185,
    0x26da, 0x7072, 0x8bac, 0x0c6d, 0x9f87, 0x0c7e, 0x9fa0, 0xa276, 0x69df, 0x5698, 0x52b7, 0x0067, 0xc022, 0xf981, 0x4077, 0x4e7a,
    0xc020, 0x871e, 0xd1e2, 0xe5c2, 0x3e41, 0xbf32, 0xd8aa, 0x7e00, 0x8b0b, 0x6e2a, 0xc685, 0xd63a, 0xb0c3, 0x7871, 0x7187, 0x3100,
    0x2bbb, 0x1acd, 0x5cc6, 0xb610, 0x52f1, 0xdcf8, 0x5900, 0x2a59, 0xcd79, 0xc343, 0x0b7f, 0x88d8, 0xfcae, 0xf81e, 0xe0d5, 0x91d7,
    0x185d, 0x1a87, 0x1791, 0x60be, 0x7710, 0x82ac, 0x4d5f, 0x98c4, 0x26b8, 0x0508, 0xec14, 0x47b2, 0xbc0a, 0xd6b8, 0x5443, 0x9c5a,
    0xfc7e, 0xae9e, 0xfc63, 0x3505, 0xba5f, 0xca0c, 0xa2e4, 0x6c78, 0x7ea1, 0x2c46, 0xc7e0, 0xf879, 0xc2c1, 0x8b8f, 0xcd94, 0x4e95,
    0xafa6, 0x624c, 0x3bab, 0xbb71, 0x24f4, 0x6794, 0xd4c7, 0xe724, 0x247e, 0xecbf, 0x190e, 0x3c7b, 0x9e8b, 0x08a8, 0xaaed, 0x5a56,
    0x9109, 0x3f55, 0x87b0, 0xf1e0, 0x0ded, 0xae83, 0x318f, 0xb33e, 0x777e, 0x737b, 0x9a0f, 0x2f7c, 0x7fd5, 0x727b, 0x5d19, 0x0c6f,
    0x10f8, 0x7d41, 0xf94d, 0x30b1, 0x58b9, 0x255d, 0xdb0f, 0x9492, 0x220a, 0x10d9, 0xe945, 0x7c2c, 0x7ffe, 0xc87c, 0x26c4, 0x6d8b,
    0x03c6, 0x06fb, 0xb434, 0xa9ee, 0xee4d, 0x3154, 0xcde6, 0x90a0, 0x85ad, 0x6c7f, 0xb04c, 0x9c72, 0xfc48, 0x7fd9, 0x27e9, 0x2b86,
    0x8f50, 0x063c, 0xe279, 0x6e3d, 0x0783, 0x862e, 0x3a85, 0x6ed7, 0x76f2, 0x474d, 0xdba7, 0x92f2, 0xe041, 0xebec, 0xc5fc, 0x1e98,
    0x251c, 0x5081, 0x6f16, 0x0711, 0xc567, 0xcbd4, 0x6470, 0xcd2d, 0x7dbb, 0xc3bb, 0x16a1, 0x34ea, 0x79ab, 0x5504, 0x5b92, 0x9870,
    0xaff0, 0x30c1, 0x1c58, 0x922d, 0x2cda, 0xc0eb, 0x9b43, 0x9530, 0xc80b, 0x8c17, 0x5140, 0x6d80, 0xa1ce, 0x18f4, 0xba44, 0x8c0b,
    0xea89, 0x9671, 0x3ac1, 0xde65, 0xfced, 0xccfe, 0xae11, 0x6b23, 0x11b9, 0xb3a9, 0x8100, 0x326b, 0xdc82, 0xb80a, 0x2897, 0xa4fe,
    0x1156, 0x460a, 0x89bd, 0x68c7, 0x499b, 0x7a00, 0x8a70, 0x4a9d, 0xb596, 0xc9f1, 0x2ed9, 0xdb6a, 0xdf56, 0x1d80, 0x1230, 0x5c01,
    0xfdfc, 0x4bce, 0x52af, 0xc111, 0x7322, 0x3b3d, 0x2cb2, 0xaa99, 0xc905, 0x1954, 0xefb9, 0x0a7f, 0xf5ae, 0xbd20, 0x5692, 0x3c51,
    0xa2c9, 0x3468, 0x5b98, 0xf2e5, 0x8d54, 0x17b5, 0xf53a, 0x329e, 0xefd3, 0x74e1, 0x547e, 0x922e, 0x85f9, 0xcb09, 0x36b7, 0xed55,
    0x209c, 0x4923, 0xa98c, 0x2094, 0xd50a, 0xe626, 0x69bc, 0x595a, 0xc65b, 0x8a2c, 0x4c37, 0x3daf, 0x6ae6, 0x54d6, 0x4548, 0x22a3,
    0xce19, 0x35f0, 0x8668, 0x716d, 0x8360, 0xec44, 0x47fd, 0x6c5d, 0x6f06, 0x6f03, 0x67c1, 0x7a15, 0x59ac, 0x7fb4, 0xba93, 0xb853,
    0xfc44, 0xdacf, 0x9425, 0x458a, 0x3f86, 0xf336, 0xa6bb, 0x0293, 0xf880, 0x9be3, 0x5401, 0x2f95, 0xa21c, 0x7d8f, 0x00dd, 0x00b5,
    0x4fdd, 0x20b5, 0x20dd, 0x2665, 0xc21c, 0x588a, 0xcf0f, 0x9d8f, 0x1881, 0x290f, 0x15a0, 0xbbe3, 0x2815, 0x4f95, 0x7401, 0x71c2,
    0x1c45, 0xd787, 0x8487, 0xfacf, 0x86c1, 0x658a, 0xb425, 0xdeaa, 0x8213, 0x2293, 0xc6bb, 0xe5b6, 0x5f86, 0xddc4, 0xd6fb, 0x1337,
    0xee19, 0xda7d, 0x4f29, 0x55f0, 0x6f61, 0x916d, 0xa668, 0xc118, 0x5d86, 0x8c5d, 0x67fd, 0x43c2, 0xa360, 0xcbc3, 0x87ee, 0x0c45,
    0x4628, 0xd853, 0xda93, 0xc9e8, 0x79ac, 0x2d83, 0xeb14, 0x9fb4, 0x8f06, 0x884b, 0xdd55, 0x8f03, 0x7cc9, 0x9a15, 0x87c1, 0x7460,
    0xc2c9, 0x58bb, 0x808d, 0x5468, 0xfb0c, 0x12e6, 0x7b98, 0x282e, 0xe0ab, 0x529e, 0x153b, 0x8b8d, 0xad54, 0x3762, 0xa0f7, 0x37b5,
    0x0ffb, 0x0d56, 0x56b7, 0xadee, 0xa5f9, 0xc784, 0x751b, 0xeb09, 0x0fd4, 0x583c, 0xf5ac, 0x94e1, 0xb431, 0xb22e, 0x747e, 0xce4f,
    0x6c04, 0x42a3, 0x6548, 0xb58d, 0x8ae6, 0xe786, 0x4e4a, 0x74d6, 0xe65b, 0xa89c, 0x539b, 0xaa2c, 0x2943, 0x5daf, 0x6c37, 0x5a20,
    0x409c, 0x3707, 0xd209, 0x6923, 0x41e6, 0x4094, 0xc98c, 0x2990, 0xe0d3, 0x795a, 0x89bc, 0x1052, 0xf50a, 0xc3ce, 0x0318, 0x0627,
    0xcff0, 0x07a9, 0xba47, 0x50c1, 0x2dec, 0xb22d, 0x3c58, 0xd40f, 0x0f8c, 0xb530, 0xbb43, 0xf1f6, 0x4cda, 0xd003, 0x0adc, 0xe0eb,
    0x22d1, 0xac0b, 0xda44, 0xdb61, 0xc1ce, 0xaca2, 0x0106, 0x38f4, 0xe80b, 0x41c3, 0xaf67, 0xac17, 0x6854, 0x8d80, 0x7140, 0xd9f4,
    0xe54d, 0xc4fe, 0x4897, 0x8171, 0xfc82, 0x6aea, 0x1cc4, 0xd80a, 0x31b9, 0x6e9c, 0xceca, 0xd3a9, 0xbdfa, 0x526b, 0xa100, 0xd704,
    0x0a8a, 0xe6ae, 0x9e7b, 0xb671, 0x6fc8, 0xfe65, 0x5ac1, 0xae98, 0x33f8, 0x8b23, 0xce11, 0x1d59, 0x1cee, 0x792f, 0x5262, 0xecfe,
    0xf34e, 0x5c51, 0x7692, 0x2ed0, 0x15af, 0x2427, 0x6526, 0xdd20, 0xe905, 0xad77, 0xeb6d, 0x3954, 0xf739, 0x2a7f, 0x0fba, 0xa4bb,
    0x1dfd, 0x143a, 0x1a1e, 0x6bce, 0xc31e, 0xe111, 0x72af, 0xcfb7, 0xd877, 0xca99, 0x4cb2, 0xc67d, 0x9322, 0x1382, 0xb309, 0x5b3d,
    0x3156, 0x96af, 0xf283, 0x660a, 0xc741, 0x88c7, 0xa9bd, 0xbd07, 0x7bda, 0x6a9d, 0xaa70, 0x1a3f, 0x699b, 0xc35d, 0xbdf1, 0x9a00,
    0x14b8, 0x7c01, 0x3230, 0xbdeb, 0xff56, 0xdf0c, 0xdb89, 0x3d80, 0xd596, 0xcdf7, 0x466e, 0xe9f1, 0xa17a, 0xfb6a, 0x4ed9, 0xddf4,
    0x385d, 0xf4fb, 0xd063, 0x3a87, 0x1c34, 0x80be, 0x3791, 0x0a42, 0x2581, 0xb8c4, 0x6d5f, 0x2f54, 0x9710, 0x0d1e, 0xcec1, 0xa2ac,
    0xde52, 0xbc5a, 0x7443, 0xbf03, 0xdc0a, 0xebe0, 0x4ad9, 0xf6b8, 0x46b8, 0x8dac, 0x632a, 0x2508, 0x419d, 0x67b2, 0x0c15, 0xa47b,
    0x48b0, 0x6e95, 0xed94, 0xdf4d, 0xe2c1, 0xa07e, 0x5407, 0xab8f, 0x9ea1, 0xf9eb, 0x25eb, 0x4c46, 0x8734, 0x187a, 0xe7e0, 0x494b,
    0x1c7f, 0xbc75, 0x4499, 0xce9e, 0x5aa0, 0x5505, 0x1c64, 0x9d5c, 0x741c, 0x8c78, 0xc2e4, 0x74f1, 0xda5f, 0xfe80, 0x933d, 0xea0c,
    0x8cd1, 0x2c6f, 0x7d19, 0xbb80, 0x9fd5, 0xc231, 0x2712, 0x927b, 0x977e, 0x485c, 0x550c, 0x937b, 0x177d, 0x4f7c, 0xba0f, 0xbba4,
    0xb109, 0x62db, 0xb360, 0x5f55, 0x1ec3, 0x11e1, 0xa7b0, 0x508c, 0xdc3b, 0xd33e, 0x518f, 0xd7db, 0x2ded, 0x7d1f, 0xd3a0, 0xce83,
    0xcfa6, 0x8a03, 0x2eae, 0x824c, 0x6ebb, 0xdb71, 0x5bab, 0xf756, 0xbac6, 0x0725, 0xf4c7, 0xc904, 0x44f4, 0x558a, 0x408c, 0x8794,
    0xdad2, 0x7a56, 0xcaed, 0x1d77, 0xbe8b, 0xbe27, 0xf6e3, 0x28a8, 0x447e, 0x119d, 0x86c9, 0x0cc0, 0x6ca5, 0x5c7b, 0x390e, 0xa2b4,
    0x6841, 0xb870, 0x7b92, 0x1227, 0x99ab, 0x5953, 0x1b0f, 0x7504, 0x9dbb, 0x6469, 0xa015, 0xe3bb, 0x5384, 0x54ea, 0x36a1, 0x39d3,
    0x451c, 0x87d7, 0x2ecd, 0x7081, 0x282d, 0x2711, 0x8f16, 0x2e17, 0x1f7d, 0xed2d, 0x8470, 0x3bf7, 0xe567, 0x996d, 0x78ca, 0xebd4,
    0xaf50, 0xec3c, 0xcd2f, 0x263c, 0x023f, 0x8e3d, 0x027a, 0x6392, 0xd32d, 0x8ed7, 0x5a85, 0x1cad, 0x2783, 0xad0a, 0x31b0, 0xa62e,
    0x5412, 0x3e98, 0xe5fc, 0x9de2, 0x0042, 0xfcd9, 0xf26c, 0x0bed, 0x96f2, 0xd5e2, 0xa4e4, 0x674d, 0xfa88, 0xb2f2, 0xfba7, 0x2be7,
    0x30f8, 0x0e8c, 0xb267, 0x9d41, 0x4aa4, 0x50b1, 0x194e, 0xcf5a, 0xe289, 0xb492, 0xfb0f, 0x560d, 0x78b9, 0x7690, 0xb4a9, 0x455d,
    0x3b15, 0x8d8b, 0x46c4, 0x5bf8, 0x9ffe, 0xd28e, 0x0857, 0xe87c, 0x420a, 0x9137, 0x0198, 0x30d9, 0xb58b, 0x9c2c, 0x0946, 0xf255,
    0xe024, 0x4b86, 0x47e9, 0xf4ae, 0x1c49, 0x9326, 0x9dbf, 0x9fd9, 0xa5ad, 0xb763, 0xa0a6, 0x8c7f, 0xeafe, 0xbc72, 0xd04c, 0x683f,
    0x23c6, 0x82b8, 0xb27e, 0x26fb, 0x83e7, 0xc9ee, 0xd434, 0xe3f3, 0x86b2, 0xb0a0, 0xede6, 0xef2e, 0x0e4e, 0xdb44, 0x6e93, 0x5154,
    0x342f, 0x7b68, 0x8c12, 0xabe4, 0x9d7a, 0x4f19, 0x9b3e, 0x0e28, 0x5164, 0x32de, 0x6b1e, 0x60cb, 0x416e, 0x055c, 0x11b4, 0x2672,
    0x1143, 0xfba1, 0x3b38, 0x68be, 0xf524, 0x2ef7, 0xefb4, 0x4c2b, 0x2f58, 0xcf5e, 0xdb65, 0xce53, 0x0033, 0x261b, 0x4996, 0xb8cf,
    0x0029, 0x2243, 0xdaca, 0xa738, 0x34bc, 0x8fcc, 0x00d8, 0x9ccd, 0x810f, 0x17d4, 0xb84e, 0xe1e3, 0xc475, 0xbc61, 0xce14, 0x2037,
    0x25d0, 0x6f9d, 0xcb04, 0x29c7, 0x9601, 0xf47a, 0x5b93, 0x2957, 0x665f, 0xe52f, 0x208f, 0x002f, 0xf2b8, 0x39c6, 0x6ae1, 0xe9b0,
    0x6e4c, 0xa71b, 0xc3b6, 0x89b4, 0x27ba, 0x8f17, 0x646b, 0xe5d7, 0x9a74, 0x25da, 0x6ed2, 0xdbb4, 0x164d, 0xa341, 0x76ed, 0x53a8,
    0xcae2, 0x94be, 0x2558, 0xea7c, 0x4550, 0xb79a, 0xe940, 0xf1a4, 0xae10, 0xf9d0, 0x9c6d, 0x9ee7, 0xa7de, 0x831d, 0xee48, 0xd410,
    0x9840, 0x278b, 0x1a82, 0x1dc9, 0xaea0, 0xeca6, 0x543e, 0x0362, 0x15e7, 0x9957, 0x4e90, 0x1b49, 0x8860, 0xfe2b, 0xfc79, 0x4d22,
    0x20e3, 0xe4ea, 0x7276, 0x9cfe, 0xf4aa, 0x8136, 0x87ab, 0x8283, 0x0f20, 0xcf1b, 0xbb6c, 0x79ca, 0xf126, 0x9b18, 0x9e86, 0xcc91,
    0xd6f1, 0xfc71, 0xb442, 0xd27a, 0xa99a, 0xcb22, 0xbb97, 0x3acf, 0x8bba, 0xb122, 0x9f38, 0x4930, 0x67b9, 0x3ba1, 0x6bb5, 0x1447,
    0x8b83, 0xd904, 0x51e7, 0xf18b, 0x9c5d, 0xb046, 0x0bb1, 0xc07b, 0x6357, 0xbf3d, 0xac97, 0x1931, 0x73d4, 0xcd23, 0xd801, 0xf56d,
    0x6fbe, 0xacb6, 0x09c2, 0x9234, 0xd144, 0x1b48, 0xbac5, 0xa89b, 0xcc3b, 0xe9c0, 0xdb9c, 0xb6bb, 0xe7c5, 0xc801, 0x142a, 0x80e1,
    0x96a5, 0xe474, 0x627e, 0x4601, 0x694a, 0x5b14, 0x3439, 0xa7ed, 0x47e5, 0x22e9, 0x9795, 0xd447, 0x9912, 0x54cc, 0x07b5, 0xdd1d,
    0x5502, 0x1a4d, 0xd3b7, 0xd7a0, 0x43d0, 0x185f, 0x3f34, 0xaa3a, 0x4c54, 0xf227, 0x64c7, 0xc912, 0xf806, 0x8c8d, 0x1cbb, 0x3405,
    0xa471, 0x6ae4, 0xe92b, 0x76a6, 0x637e, 0xbf06, 0xf3ca, 0x4ff3, 0x1d7d, 0xa536, 0xb6c9, 0xf1ba, 0xe1f1, 0xcc9c, 0x0425, 0x1b57,
    0xe01a, 0xc89e, 0x8719, 0x114d, 0x8ab1, 0xb57c, 0x7182, 0x1f7f, 0x03b9, 0xcc0e, 0x91d2, 0xa528, 0x3831, 0xc018, 0x2bb6, 0xa29f,
    0xfccf, 0x5e82, 0xf97c, 0xa757, 0x02f9, 0xe173, 0x8ba7, 0x2617, 0x27f4, 0xe415, 0x511e, 0x1ed3, 0x6a65, 0x4718, 0x11f8, 0x71ec,
    0xb2be, 0xb1d7, 0x00d6, 0x8a67, 0x1caf, 0xbfba, 0x616a, 0x181f, 0xed79, 0x61ba, 0x6cca, 0xe343, 0xc1df, 0xa8d8, 0x2b7f, 0x639f,
    0x4bbb, 0x47a7, 0x9b90, 0x3acd, 0x1a33, 0xd610, 0x7cc6, 0x9701, 0x39a3, 0x4a59, 0x7900, 0x78de, 0x72f1, 0x20ed, 0x0d35, 0xfcf8,
    0xe020, 0xff4b, 0x37a8, 0xa71e, 0x6e24, 0x05c3, 0xf1e2, 0x44f7, 0x5fab, 0x9e00, 0xf8aa, 0xa463, 0x5e41, 0x427f, 0xe544, 0xdf32,
    0x39df, 0x5100, 0x9187, 0xfa35, 0xd0c3, 0xa439, 0xd114, 0x9871, 0xab0b, 0xbe1f, 0x5b1f, 0x8e2a, 0xd657, 0xf63a, 0xe685, 0x0f6d,
    0x6b2a, 0x7335, 0xb645, 0x85bd, 0x2e18, 0x7123, 0x4895, 0x62a1, 0x984a, 0xa1cd, 0x5042, 0x71b5, 0xdcc2, 0x972f, 0x959e, 0xb4b6,
    0x043d, 0xf185, 0x91a8, 0x4a94, 0x31fd, 0x4132, 0x0aa8, 0x2663, 0x061f, 0x81d1, 0xde69, 0x2b8a, 0x520f, 0xe19f, 0x3c59, 0xc204,
    0x4ad3, 0x6e7a, 0x6077, 0x5bd1, 0xe022, 0x2d3c, 0x251f, 0x1982, 0x89df, 0xb4a6, 0xd145, 0x7698, 0xe216, 0x2067, 0x72b7, 0xb8cb,
    0x46da, 0xcde3, 0x18e4, 0x9072, 0x134d, 0x2c6d, 0xabac, 0x3024, 0x9a8a, 0xc276, 0xbfa0, 0xcdba, 0xbf87, 0x8885, 0xc4f5, 0x2c7e,
    0x524f, 0xef72, 0x9742, 0x32d2, 0xf7cf, 0xbf71, 0x4c93, 0x3bad, 0x5a0c, 0x84cc, 0x2155, 0xd57a, 0x3d28, 0xf76a, 0x488e, 0xbe34,
    0x218b, 0x5a06, 0xb92c, 0xa354, 0x53ec, 0x3a4a, 0x9d73, 0xb84b, 0x3cc0, 0xe0de, 0x1b41, 0x6722, 0xba9c, 0x569b, 0x26cd, 0xcd9d,
    0x4f8f, 0x3372, 0xc759, 0x4992, 0xed17, 0xa4e6, 0xcfe9, 0x2767, 0x3457, 0x373c, 0xda76, 0xf3bc, 0xb084, 0x5dd8, 0x0353, 0xb680,
    0x459a, 0x3775, 0x8245, 0xab74, 0xe4e9, 0x46d9, 0x6922, 0xcaec, 0x47b8, 0x19d2, 0x5f39, 0xdd3f, 0x9579, 0x5e71, 0xb260, 0xb974,
    0x610b, 0xcc65, 0x9569, 0x9de8, 0x9907, 0x5102, 0x721e, 0x154a, 0x4842, 0x4b40, 0x97c7, 0x14c9, 0x4d4e, 0xd6ce, 0x80c5, 0x41aa,
    0x84a1, 0x1d10, 0x2602, 0xcac6, 0xca18, 0xd727, 0x77fd, 0x46f7, 0x4efd, 0x5b82, 0xe2a6, 0xb0b8, 0x242a, 0x5cfa, 0x8168, 0xddb0,
    0x75f3, 0x3272, 0x6e56, 0xf8d7, 0x941f, 0x3053, 0x5797, 0x9749, 0x4efa, 0x0337, 0x6d1f, 0xbef8, 0x4b82, 0x4765, 0x6eac, 0x0931,
    0xa4ae, 0x3fcc, 0x5cb7, 0x79f7, 0xf169, 0x702a, 0xbf2a, 0x258d, 0x9d4c, 0x0803, 0x0385, 0x6e72, 0x92c9, 0xa063, 0x13d0, 0x1c93,
    0x9efb, 0xf0a7, 0xc006, 0x6ce6, 0xcc50, 0x0448, 0xf119, 0xf633, 0xd2dc, 0x4706, 0x3803, 0xba95, 0xc8ec, 0xc4c3, 0xce08, 0x6970,
    0xf527, 0xb944, 0xbece, 0x041e, 0x8c7b, 0xd3d1, 0xeb20, 0xb18c, 0xbb03, 0x8ade, 0x6115, 0xa460, 0x8e5e, 0x43ed, 0xbbd7, 0xcc8a,
    0xd196, 0x3d38, 0x9987, 0xf5a5, 0x068b, 0x54ba, 0x34ad, 0xa6e7, 0xe824, 0xf6e5, 0xb448, 0x02eb, 0xfbc6, 0xbd30, 0xc7ef, 0xe9ea,
    0x7dbc, 0xd0ee, 0x7aee, 0xcd11, 0xc14e, 0x7b24, 0xd038, 0xd5db, 0x3b8f, 0x7bc5, 0x8411, 0x46b1, 0x0bfa, 0xacdb, 0x547d, 0xc19e,
    0x162a, 0x5489, 0x11e8, 0x451d, 0x03fa, 0x7f69, 0x717c, 0x830b, 0x18b2, 0xa065, 0x3ebd, 0xf713, 0xa32f, 0x7017, 0xbb00, 0x84ab,
    0xe144, 0x9b06, 0x1552, 0x57ad, 0x3359, 0x6797, 0xb1f3, 0xe1f9, 0x82c0, 0x07aa, 0xfe19, 0xf520, 0x2a0e, 0xaa78, 0x1d50, 0x3eae,
    0x054a, 0xe553, 0x9150, 0xbb22, 0xa533, 0x10b5, 0xab80, 0x2dc8, 0x145f, 0x57da, 0xe713, 0x2609, 0x24da, 0x9235, 0x58d2, 0xf2ab,
    0x3548, 0x18b0, 0x4182, 0xbd17, 0x7654, 0xb824, 0xbc4f, 0x8246, 0x4084, 0x42c8, 0xaab7, 0x096d, 0x0953, 0x39b4, 0x0a61, 0x4c1a,
    0xad64, 0x3c23, 0x79fd, 0x5689, 0x1f0f, 0x75c2, 0xa05d, 0x24ed, 0xf758, 0xcc02, 0x7f3a, 0xc0e4, 0x04fd, 0xb513, 0x9ccb, 0x67e7,
    0x6453, 0xa93c, 0xaede, 0x81c6, 0x903a, 0x5e5f, 0x09d6, 0x2ef3, 0x6d4b, 0xf72d, 0xfe7d, 0x40c4, 0x1e36, 0x08ea, 0x5dc6, 0xbb95,
    0x630f, 0xd0cf, 0x4e61, 0xb0e6, 0xd6bc, 0x346c, 0x9978, 0x852c, 0xf7ab, 0x730d, 0x00b7, 0xf96e, 0x2d3a, 0xb1a0, 0x33ef, 0x5ce8,
    0x75fd, 0xe200, 0x4753, 0x0ec7, 0xb3be, 0x109d, 0xe06d, 0xe0cd, 0x60ee, 0xa051, 0xbf98, 0xd303, 0xdb7e, 0x9905, 0x29fd, 0x895d,
    0x5a9f, 0x2d82, 0xd113, 0x2956, 0x9c0d, 0xd0ed, 0x426d, 0xa673, 0x1295, 0x8d91, 0x816f, 0x7f05, 0x32a5, 0xf628, 0xa230, 0x446a,
    0xa8c6, 0xe6ba, 0x4507, 0x3c48, 0x6a58, 0x7796, 0x3f7e, 0x4f57, 0xa0a2, 0x8fdb, 0x40b3, 0x20db, 0xa872, 0xdbd6, 0xa2f4, 0x163e,
    0x8e02, 0x8873, 0xc612, 0xd345, 0xe187, 0xa4b8, 0x1069, 0x8074, 0x4b84, 0x054c, 0x2055, 0x5e74, 0x2374, 0xa976, 0x469d, 0x22d4,
    0xe229, 0x3ff5, 0xd175, 0x952a, 0xd476, 0x70e3, 0x2ba3, 0xe18d, 0xd531, 0x8ccf, 0x3f1b, 0xbe55, 0x971d, 0xc412, 0x8b1a, 0x0dcb,
    0x4f83, 0x69e5, 0x429b, 0xcb64, 0x4abe, 0x28c1, 0x5607, 0x38e9, 0x877b, 0x67da, 0x57af, 0xddb2, 0x37e6, 0xf06b, 0xfbe9, 0x4c27,
    0x5947, 0x742b, 0xb89b, 0xf0cb, 0x3993, 0xbedf, 0xcbb1, 0x4053, 0x65f0, 0x956c, 0x36d6, 0x2195, 0x403f, 0x9a03, 0xecf5, 0x82f5,
    0x69a6, 0xc6f1, 0x8569, 0xf69d, 0x1712, 0xdfa5, 0x7cef, 0xb21c, 0xab00, 0x97ce, 0x6014, 0x27e6, 0x3750, 0x73c5, 0x7071, 0x209b,
    0x9c0e, 0xc3bc, 0x2daf, 0x194b, 0xe4fa, 0x4319, 0xf8f6, 0x76e7, 0x3512, 0x5289, 0x5d9d, 0x9d2e, 0xfadc, 0xa5e5, 0xd82c, 0xd557,
    0xa5a9, 0x5097, 0x87d8, 0x807c, 0x5e0d, 0x791d, 0x31ce, 0xc795, 0xcd4c, 0x85fb, 0xdbef, 0x28e3, 0x79a9, 0x940c, 0x5259, 0xeb2d,
    0xfaab, 0x8ddd, 0x4524, 0x8d6e, 0xd166, 0x5e07, 0x9ca5, 0xf1fe, 0xcff1, 0xb7c1, 0x75b2, 0xccdc, 0xb613, 0x54d4, 0x13e4, 0x2bf3,
    0x445d, 0xf14a, 0xc34b, 0xc8fc, 0xde88, 0x28f7, 0x633a, 0x8670, 0x6de5, 0xfb58, 0xa654, 0x1ec5, 0x09c3, 0xebc5, 0xa3b4, 0xffa7,
    0x92bc, 0xae44, 0x5980, 0x1eeb, 0x2a6d, 0x5751, 0xab75, 0x4d93, 0x16ae, 0x0e9b, 0x6c0a, 0xa3e3, 0x89c9, 0x8d36, 0x2d9a, 0x1370,
    0xd864, 0x5c69, 0x5a50, 0x224e, 0xf91a, 0xcf96, 0x7631, 0x1976, 0x7225, 0x95e4, 0x5578, 0x78a8, 0xb75f, 0xe998, 0x22aa, 0xb1ad,
    0x853c, 0x7043, 0xd923, 0x0a76, 0xe3e4, 0x3ea8, 0x2b02, 0x7d0d, 0x7428, 0xfa3b, 0x7d83, 0xe301, 0x4f6a, 0xa327, 0x2aad, 0x3aa9,
    0x05cc, 0x2c76, 0xbf7a, 0xd730, 0xecaf, 0xf483, 0x1868, 0xb04f, 0x8e46, 0xc9f7, 0x80c7, 0x11ea, 0x88d0, 0xfe6e, 0x12ef, 0x6593,
    0x0d0c, 0x45a4, 0x849e, 0x8cf2, 0x149a, 0x5eda, 0x117e, 0x876f, 0x3475, 0x70ec, 0x0451, 0x67a0, 0x5c5e, 0x5ee3, 0x7926, 0xbee8,
    0x812e, 0xeb7c, 0x3395, 0xefb0, 0x767e, 0xb9cc, 0x1df7, 0xb6d9, 0x1833, 0xe88f, 0xc233, 0xd64a, 0x6f2b, 0xdac7, 0x8016, 0x9c1a,
    0x0c44, 0xe7df, 0xbc60, 0x5e40, 0x02ea, 0x6013, 0xde37, 0xe985, 0xcfca, 0xdb32, 0x689a, 0x6963, 0x38d1, 0x85d2, 0xf5e5, 0xa903,
    0xf63e, 0x3fd0, 0x1b4c, 0x995b, 0x4f99, 0x5c55, 0x2715, 0xd342, 0x54d8, 0x7047, 0xd0f1, 0x470a, 0x0691, 0x0748, 0x1ce5, 0x2f43,
    0x0819, 0xbc3f, 0xb148, 0x84b2, 0x9617, 0xb2e0, 0x71d9, 0x412c, 0xb5a3, 0x6e0c, 0x5006, 0x70ab, 0x31c6, 0x39fb, 0xacf8, 0x7a99,
    0xd6b1, 0x2e34, 0x96f5, 0x2ca9, 0xd265, 0xe5d5, 0xb049, 0x6da1, 0xa77d, 0x5a61, 0x6fdf, 0xc99c, 0xdf4f, 0x613a, 0x446d, 0xf385,
    0x834d, 0xa270, 0x448d, 0xa254, 0x7180, 0x7f3e, 0xf5e9, 0xb89f, 0x4add, 0x019c, 0x0ae0, 0x8091, 0x00dc, 0x91d6, 0xb264, 0x18e8,
    0xac83, 0xc632, 0xa250, 0xcb93, 0x09f6, 0x0d03, 0x8927, 0xbfb8, 0x34cd, 0xde38, 0xa5c1, 0x3823, 0x11bf, 0x1572, 0x0a81, 0x6c2f,
    0x31ee, 0x4f47, 0x16a2, 0xa674, 0xf307, 0x2dcf, 0xed15, 0xa24a, 0x0e41, 0x5a70, 0x130f, 0x23b3, 0x71f9, 0x6dc4, 0xc258, 0x68ba,
    0x2358, 0x2ece, 0xba2f, 0x499e, 0x4af9, 0x0e7c, 0xbfc2, 0xc304, 0x029a, 0x5d8e, 0x5f02, 0xa035, 0xcea6, 0x46e4, 0x6eb3, 0xe82f,
    0x6546, 0xfa7b, 0xbd6a, 0xaa90, 0xb4d2, 0x9e9b, 0x7160, 0x48b6, 0x2bfb, 0x20fd, 0x880e, 0x50c2, 0xc9ac, 0x0402, 0x037a, 0xf5cc,
    0x9b5e, 0x4625, 0xefee, 0xb86e, 0xc7fb, 0x7296, 0xee68, 0x072c, 0x7584, 0xd3d7, 0x2bd6, 0xa291, 0x3459, 0x068d, 0x4965, 0xacb7,
    0xeafa, 0xc779, 0x48ae, 0xe75e, 0x781d, 0x459b, 0x93c6, 0x03a5, 0x253f, 0x7d49, 0xb87f, 0x5062, 0x0bbe, 0x9bb0, 0xe6a5, 0x5032,
    0x1a2c, 0x52e9, 0x0af3, 0xda52, 0x6e30, 0x8495, 0x56c5, 0x03f0, 0x1da6, 0x7451, 0xb36e, 0x2fe8, 0x46d2, 0x13a4, 0x9e72, 0x2edb,
    0xd2b4, 0x9b9e, 0x91b6, 0xf378, 0x2610, 0xc9e2, 0xc838, 0xb93a, 0xe939, 0xdd01, 0x067b, 0x51f5, 0xec4d, 0x3b46, 0x2566, 0xca15,
    0x6128, 0x0744, 0xd842, 0x7319, 0x691c, 0x1ab9, 0x9540, 0x4693, 0x1a17, 0x58eb, 0x6932, 0x91c4, 0xb246, 0x449b, 0xbd78, 0x6138,
    0x4515, 0x36e9, 0x6b34, 0xaeec, 0x9d04, 0xbedc, 0x1560, 0xd2f9, 0x2c2e, 0xb8a9, 0x4532, 0xe5f1, 0xbc6e, 0x6db2, 0xb244, 0xd931,
    0x3c89, 0xde8e, 0xbb52, 0x9300, 0xa3dc, 0x7a23, 0xdb78, 0x593d, 0x6893, 0xd648, 0x8071, 0x3e7f, 0x7b26, 0x19d4, 0x2726, 0x34da,
    0x6d44, 0x85f3, 0x1a09, 0x3ef1, 0x19c2, 0x8ce9, 0xa420, 0x7913, 0xa652, 0x415a, 0x5d69, 0x7ebb, 0x7bbe, 0x4dd2, 0xb668, 0x4dc0,
    0x00d5, 0xabe3, 0x385c, 0x20b4, 0xc6ce, 0x6da0, 0x4abd, 0x0447, 0x6a23, 0x2f9c, 0x6c98, 0xcc00, 0x6dab, 0xbb64, 0x4489, 0x6e5d,
    0xfa6c, 0xa038, 0x9f5d, 0x3b34, 0xc50a, 0x633d, 0xf7f3, 0x2f39, 0x1392, 0xd78a, 0xe822, 0xb747, 0x27c7, 0xd65a, 0x81ed, 0x0d5c,
    0x5bed, 0xc707, 0x52da, 0xf30a, 0xdab5, 0x238a, 0xc6cf, 0x956f, 0x008b, 0xe607, 0xb85a, 0x6c3a, 0xbf31, 0x835f, 0x77cd, 0x85c0,
    0xf323, 0x2f0d, 0x0736, 0xc108, 0x33d5, 0x4f13, 0xc590, 0x032d, 0x01dd, 0x39e9, 0xf365, 0x08fa, 0x1ce2, 0x80a3, 0xe3cb, 0x648a,
    0xfb3a, 0x1078, 0x4a36, 0xa315, 0x683b, 0x7a5d, 0x396b, 0x7cbc, 0xe986, 0xe7b5, 0xea56, 0xe00c, 0x3ee5, 0xb05b, 0x2157, 0xf11b,
    0xd49f, 0xe512, 0x426e, 0x34eb, 0xaa24, 0x5ed1, 0xdf2f, 0x85b3, 0x8983, 0x2f3f, 0x1c19, 0x4b73, 0x2b97, 0x614c, 0xfe5c, 0xab47,
    0x7082, 0x8d24, 0x5a41, 0x52a6, 0xd95d, 0x68d6, 0xb368, 0x03af, 0xf6fd, 0xcc99, 0xebb3, 0x6687, 0xe02a, 0x720b, 0xf4fd, 0x13a6,
    0x8eb1, 0x2467, 0xd834, 0x0a27, 0x5e9f, 0x89fb, 0x6d0e, 0x54c2, 0x0093, 0x52bb, 0xba48, 0xf951, 0x93fa, 0xa25c, 0x1399, 0xe9d9,
    0xdc6b, 0x8bcb, 0x72c6, 0x8e5b, 0x35ba, 0x1491, 0x73b3, 0xc3ac, 0x291a, 0xbd62, 0xb3f6, 0x113f, 0xb3ab, 0xa5d3, 0x6fbf, 0xa38c,
    0xf059, 0x855e, 0x779c, 0xafae, 0x3776, 0xeaaf, 0x8349, 0x4c21, 0x9200, 0xfc20, 0xa63a, 0x99f1, 0x9194, 0xc644, 0x3533, 0x17ee,
    0x465b, 0xf4e0, 0xd400, 0xfa14, 0x5c82, 0x98f3, 0xd691, 0xdc00, 0x83c5, 0xfd40, 0xef15, 0xee3c, 0x3a5f, 0x02ac, 0xb18e, 0x6724,
    0x661e, 0xd697, 0x4685, 0x08d8, 0xb3eb, 0x8766, 0xbcb6, 0x2c65, 0xb501, 0x0757, 0x1ac5, 0x1046, 0xa16d, 0x49b0, 0xae8f, 0x59d0,
    0x077d, 0x83b2, 0xa964, 0x6401, 0x03dc, 0x8f38, 0x3842, 0xfb9d, 0xc61d, 0xc400, 0x2c89, 0x7174, 0xf3f9, 0x038c, 0x7c18, 0x4607,
    0x9511, 0x3db2, 0x73e3, 0x4bc5, 0xf616, 0x16d9, 0x3923, 0x8c75, 0xc30e, 0xe1c5, 0xa26c, 0xd0e2, 0x84d9, 0x9ead, 0x9802, 0xdbc4,
    0xc4b1, 0x5867, 0xf7c0, 0x77e5, 0xc52b, 0x1175, 0x04c3, 0xc2bf, 0x3951, 0xb7cc, 0x79a1, 0x43db, 0x3385, 0xc80d, 0x5ab8, 0x3a6c,
    0xc170, 0x1b89, 0x690e, 0xf430, 0x23f3, 0x0d2f, 0xbd1e, 0x6580, 0xa0ca, 0x2e48, 0xecb5, 0x42f8, 0x0204, 0xacc9, 0xb029, 0x8f8e,
    0x8e92, 0x14fb, 0x6fdc, 0xfdf3, 0xac11, 0x6717, 0xb2c8, 0xaa66, 0xd048, 0xf789, 0x69b2, 0xb56e, 0x7005, 0x48c0, 0xec4f, 0xde54,
    0xcf5d, 0x39a2, 0xe5b5, 0x6329, 0x91d5, 0x1ce1, 0xcc89, 0xecf4, 0x49b3, 0x7367, 0x9223, 0x2f8d, 0x7600, 0x7d5b, 0x5aed, 0xc511,
    0x0fe7, 0x5224, 0xb002, 0x288d, 0x7002, 0x5002, 0x3224, 0x9002, 0x7224, 0xcc01, 0xef14, 0x2fe7, 0x5383, 0xd002, 0x488d, 0x1446,
    0xec01, 0xdc4e, 0x6d92, 0x9224, 0x0aaf, 0x0f15, 0x4fe7, 0x981c, 0xede2, 0x688d, 0x3446, 0x40e2, 0xf002, 0xf208, 0x3d76, 0x7383,
    0x888d, 0xf0b7, 0xae23, 0x0de3, 0xf6c8, 0x5446, 0x60e2, 0xcfcb, 0x9406, 0x5d76, 0x9383, 0xd136, 0x1209, 0x0118, 0x1877, 0x1003,
    0xf667, 0x6fe7, 0xb81c, 0x0632, 0x2f15, 0xcf8d, 0x3b3a, 0x2aaf, 0xfc4e, 0x35a5, 0xe871, 0x0c02, 0xc568, 0x8d92, 0xb224, 0xc5d1,
    0x55a5, 0x5527, 0xdf68, 0x1c4f, 0x82d3, 0x0872, 0x2c02, 0x1f98, 0xc79f, 0xd224, 0xe5d1, 0x7ce4, 0xad92, 0xbe0c, 0xd42a, 0xe568,
    0x2108, 0x5b3a, 0x4aaf, 0x1368, 0xef8d, 0xd004, 0x41c5, 0x4f15, 0x8fe7, 0x8c2d, 0x1b64, 0x1668, 0x2304, 0xd81c, 0x2632, 0xa48c,
    0xe9b3, 0x80e2, 0xefcb, 0x4fb4, 0x7446, 0xf911, 0x2c0e, 0x16c9, 0x10b8, 0xaef9, 0xbe70, 0xa88d, 0xf700, 0xce23, 0x2de3, 0x1645,
    0x7d76, 0xecd0, 0x4be0, 0xb406, 0x8be6, 0xb383, 0xf136, 0x00a6, 0x7a3e, 0x3877, 0x3003, 0xb261, 0x2118, 0xe6c0, 0xb8ba, 0x3209,
    0x5877, 0x2d77, 0xc66d, 0x9a3e, 0xe853, 0x5003, 0xd261, 0x5704, 0x8ffa, 0xd8ba, 0x5209, 0x358d, 0x06c1, 0xd889, 0x6b14, 0x4118,
    0x6289, 0x1137, 0x20a6, 0x6f2e, 0xd383, 0x196d, 0xb1af, 0xabe6, 0x0cd1, 0xe2da, 0xaead, 0x9d76, 0x9c33, 0x6be0, 0xd406, 0x1d5c,
    0xa7f3, 0x4c0e, 0x36c9, 0x4912, 0x1912, 0x4801, 0x5801, 0x9446, 0xa0e2, 0xa78a, 0xa557, 0x09b4, 0x1601, 0x0fcc, 0x6fb4, 0x8e27,
    0xcef9, 0x8802, 0x17c7, 0x30b8, 0x3084, 0xde70, 0xc88d, 0x4d9d, 0xcad2, 0x4de3, 0x3645, 0xca93, 0xee23, 0x2439, 0xe169, 0x1701,
    0xed4a, 0x4c02, 0x3f98, 0x796e, 0x2872, 0x7628, 0x0b1a, 0xa2d3, 0x7527, 0x70a7, 0xfaed, 0x75a5, 0xb358, 0xff68, 0x3c4f, 0xadc7,
    0xf224, 0x7a3b, 0x00c7, 0xe79f, 0xef2a, 0x05d2, 0x9ce4, 0xfa98, 0xcf82, 0xf42a, 0x0569, 0x994a, 0xde0c, 0xde06, 0xe339, 0xcd92,
    0xac2d, 0xd8ea, 0x867a, 0xafe7, 0xa7c6, 0x3b64, 0x3668, 0xb4d9, 0xb1ed, 0x4632, 0xc48c, 0xaca8, 0xf81c, 0xf295, 0xf15f, 0x4304,
    0x461d, 0x61c5, 0x6f15, 0x9045, 0xf004, 0xfd5a, 0xdab7, 0x0f8e, 0x7b3a, 0x6512, 0xd2d9, 0x4108, 0xb5b9, 0x6aaf, 0x3368, 0xd4c1,
    0x8512, 0x9e5c, 0x911b, 0x9b3a, 0x235f, 0xf2d9, 0x6108, 0xbce1, 0x6c99, 0x5368, 0xf4c1, 0xa092, 0x8aaf, 0x463a, 0xb13e, 0xd5b9,
    0xf866, 0xfab7, 0x2f8e, 0x6170, 0x1d5b, 0x85b5, 0x9df3, 0x1005, 0x81c5, 0xd922, 0x9b9d, 0x661d, 0x38f3, 0x8f15, 0xb045, 0x53eb,
    0x25f3, 0x5668, 0xd4d9, 0xdc88, 0x5b64, 0xd85b, 0xdb33, 0xc7c6, 0xf8ea, 0x3540, 0x72f9, 0xcc2d, 0x69e2, 0xa67a, 0xcfe7, 0x0e30,
    0x6632, 0xaa80, 0x08ba, 0xd1ed, 0x31d6, 0xe48c, 0xcca8, 0x7f4f, 0xc0fc, 0x1160, 0x6304, 0xa299, 0x1296, 0xcbd5, 0xf061, 0x181d,
    0xdff4, 0x2b1a, 0xc2d3, 0x2e02, 0x9628, 0x7113, 0xdc47, 0x4872, 0x6c02, 0x405d, 0xcef2, 0x0d4b, 0xb09c, 0x5f98, 0x996e, 0x76bc,
    0x90a7, 0x6e08, 0x6c8a, 0x9527, 0x4cdb, 0x1aee, 0x95a5, 0x9bc6, 0xe2c7, 0x5c4f, 0xcdc7, 0xb45e, 0x1f69, 0xdebc, 0x9520, 0xd358,
    0x142b, 0x8cf5, 0xec26, 0xef82, 0x13c5, 0x2569, 0xb94a, 0x9adc, 0x9b58, 0x033a, 0xed92, 0xb6ad, 0xfe06, 0x15b2, 0xc8e2, 0xfe0c,
    0xdfcf, 0xbce4, 0x1a99, 0xa818, 0x25d2, 0x5c60, 0x8fb0, 0x0f2b, 0x9a3b, 0xcb01, 0xb975, 0x1225, 0x9483, 0x20c7, 0x07a0, 0xb499,
    0x86ae, 0xf261, 0x7704, 0x854d, 0x7003, 0x5a47, 0x7b61, 0x0854, 0x4d77, 0x0526, 0x6fb7, 0x7877, 0x7f0c, 0xe66d, 0xba3e, 0x6741,
    0xf8ba, 0x40f7, 0x6e4f, 0xaffa, 0x63ce, 0x7209, 0x558d, 0xc942, 0x284b, 0x8b14, 0x6118, 0xfd85, 0xf889, 0xb59f, 0x85b6, 0x26c1,
    0x02db, 0x73a0, 0x5ba4, 0x2cd1, 0xf589, 0xcead, 0xbd76, 0x0ca5, 0x99eb, 0xf406, 0x3d5c, 0x141c, 0x8be0, 0x032a, 0xcf53, 0xbc33,
    0x8c3c, 0xd1af, 0xcbe6, 0xf411, 0x396d, 0xcecc, 0xb226, 0xf383, 0x3137, 0xa856, 0x6f5a, 0x8289, 0x3326, 0x40a6, 0x8f2e, 0x23e7,
    0x6de3, 0x64f5, 0x58cb, 0xead2, 0x372f, 0x5645, 0xea93, 0xf20e, 0x01ba, 0x016a, 0x3701, 0xd9a2, 0x4439, 0xfb1e, 0x4463, 0x0e24,
    0x8f72, 0xe88d, 0x6d9d, 0xc18a, 0xfe70, 0x2245, 0xe991, 0x5084, 0xa802, 0x5f2a, 0x3749, 0xeef9, 0xf101, 0x37c7, 0x50b8, 0x6a18,
    0x7904, 0x7801, 0xb446, 0x76f1, 0x6801, 0xa9c1, 0xe600, 0x3912, 0x6c0e, 0x1182, 0xc616, 0xc7f3, 0x5f06, 0x56c9, 0x6912, 0xe3cf,
    0xc78a, 0x9c79, 0x6c91, 0xc0e2, 0x231d, 0xc557, 0x29b4, 0xb64c, 0x6f5e, 0x8fb4, 0xae27, 0xf163, 0x2fcc, 0x584e, 0xa02e, 0x3601,
    0xafb4, 0x28be, 0xc032, 0x8f5e, 0x4c12, 0xce27, 0x1164, 0xc55b, 0x2ae1, 0xc02e, 0x5601, 0x2f9d, 0x784e, 0xe036, 0xc028, 0x4fcc,
    0x246b, 0x49b4, 0xd64c, 0xe5d9, 0xe557, 0xb1a4, 0x6e10, 0x431d, 0xbc79, 0xdb48, 0x6ea0, 0xe78a, 0x7b6c, 0x8c91, 0xe0e2, 0x4136,
    0xf438, 0x0601, 0x5912, 0xe2e8, 0xc9c1, 0x689b, 0x8c3b, 0x8801, 0x9801, 0xd930, 0x5c5d, 0x9904, 0x5f38, 0xd446, 0x96f1, 0x8b22,
    0x3182, 0xd14c, 0xf830, 0x8c0e, 0xb97c, 0xe616, 0xe7f3, 0x0718, 0xdcba, 0x8912, 0x03d0, 0xda4c, 0x76c9, 0xdb56, 0x6471, 0x7f06,
    0xcaa7, 0x0a94, 0x120f, 0x41d1, 0x7645, 0x22a1, 0x584a, 0x572f, 0x84f5, 0x8dba, 0xd34c, 0x8de3, 0x9145, 0x78cb, 0x0ad3, 0xed3b,
    0x216a, 0x4a67, 0x81df, 0x21ba, 0x5b90, 0x5701, 0xf9a2, 0xe0ec, 0xa544, 0x6463, 0x2e24, 0xbf4b, 0x1b1f, 0xcf6c, 0xf9de, 0x6439,
    0x7f2a, 0x39f7, 0x52c9, 0xc802, 0x2e56, 0x5749, 0x0efa, 0x0765, 0x4168, 0x70b8, 0x8a18, 0xdd0f, 0x57c7, 0x01aa, 0x210b, 0x1102,
    0x8fe9, 0x0992, 0x7084, 0xf73b, 0x4245, 0x8aec, 0x07b8, 0x1e71, 0x088e, 0x957a, 0xb7cf, 0xaf72, 0xdb40, 0x8d9d, 0xe18a, 0xfa49,
    0xc105, 0x9b61, 0x2854, 0x01c3, 0x7a47, 0x940f, 0xcf8b, 0x9003, 0x1262, 0xdd58, 0x2fc8, 0xa6ae, 0x8eca, 0x9704, 0xa54d, 0x2aea,
    0x2526, 0xeecf, 0xb739, 0x6d77, 0xda1d, 0x8fb7, 0x9877, 0xd381, 0x7df1, 0xda3e, 0x8741, 0x56af, 0x066e, 0x9df4, 0xd4b7, 0x9f0c,
    0xab14, 0x89e8, 0x3cc9, 0x484b, 0x0f29, 0x8118, 0x1d86, 0x8bc3, 0x96fb, 0xa5b6, 0x46c1, 0x9787, 0xd59f, 0x31c2, 0x0fdd, 0x188a,
    0x0e4a, 0x758d, 0xe942, 0x689c, 0x9209, 0xe98f, 0xa0d3, 0x83ce, 0x60f7, 0x4b8d, 0xbb0c, 0x18bb, 0xb5ac, 0x8e4f, 0xcffa, 0x8784,
    0xc856, 0x1bf8, 0x758b, 0x5137, 0x7267, 0x8f5a, 0xa289, 0x3690, 0x2e93, 0xaf2e, 0x43e7, 0x42b8, 0x60a6, 0x283f, 0xa024, 0x5326,
    0xdb0e, 0xd226, 0x1384, 0x2469, 0xeecc, 0xee16, 0xdf7c, 0x596d, 0xf1af, 0xdcac, 0xc23e, 0xac3c, 0x64e4, 0xebe6, 0x1412, 0xbcd9,
    0xb6e3, 0xdd76, 0x2ca5, 0xd19c, 0xeead, 0xb756, 0x7ac6, 0x158a, 0x93a0, 0x97db, 0xdec2, 0x22db, 0x150c, 0x7ba4, 0x4cd1, 0x8231,
    0x1407, 0x9f4d, 0x4734, 0xb9eb, 0x0499, 0x5d5c, 0x341c, 0xbe80, 0x8ec1, 0xef53, 0xdc33, 0xb4fb, 0x232a, 0x647b, 0x9e52, 0xabe0,
    0x8590, 0x8108, 0xdce1, 0xf9e8, 0x12da, 0x556f, 0xc08a, 0x435f, 0xbe5c, 0x0b73, 0x6a24, 0xa512, 0xaa56, 0xb11b, 0xbb3a, 0x3a5d,
    0x7368, 0x12a6, 0xa02a, 0x8c99, 0x9834, 0x14c2, 0xc092, 0x625c, 0x2fbf, 0xd13e, 0xf5b9, 0x4bcb, 0x663a, 0xd7ed, 0xb059, 0xaaaf,
    0xf922, 0x0bc5, 0x44d9, 0xa1c5, 0x6964, 0xbb9d, 0x861d, 0xc38b, 0x6e8f, 0xd045, 0x73eb, 0x9697, 0xaf15, 0x2724, 0x065b, 0x58f3,
    0x72c8, 0xbdf3, 0x3005, 0xb789, 0xa5b5, 0xacf4, 0x09b3, 0x3d5b, 0x1ab8, 0x03db, 0x852b, 0x1867, 0xacb5, 0x4f8e, 0x8170, 0xcd2e,
    0x3160, 0x6a90, 0x89ac, 0xe0fc, 0x7a2f, 0x8304, 0xc299, 0x06e4, 0xa6a5, 0x1062, 0x381d, 0x8779, 0xebd5, 0x6cb7, 0x5b5e, 0x3296,
    0x7049, 0xeca8, 0x9f4f, 0x1a61, 0x048d, 0x789f, 0x0add, 0x51d6, 0xca80, 0xf822, 0xc9f5, 0x8632, 0xd30e, 0x28ba, 0xf1ed, 0xedce,
    0xb7f3, 0xfb33, 0xe7c6, 0x978a, 0xf85b, 0xc446, 0x2a23, 0x7b64, 0x7668, 0x3ebb, 0xd9c1, 0x45f3, 0x4071, 0xf4d9, 0xfc88, 0x3a23,
    0x5540, 0x3319, 0x7246, 0x18eb, 0x2b34, 0x92f9, 0xec2d, 0x2db2, 0x5e72, 0xefe7, 0x2e30, 0x12e9, 0xc67a, 0x8a15, 0x92b4, 0x89e2,
    0xeb01, 0xca75, 0x0f6a, 0xba3b, 0x1a50, 0xd975, 0x3225, 0xa998, 0x3926, 0x27a0, 0xd499, 0x05a4, 0x40c7, 0x2593, 0xc5cb, 0xb483,
    0xddf6, 0xafb0, 0x2f2b, 0xa88f, 0x7c60, 0xa985, 0x8fca, 0x45d2, 0xdce4, 0x070a, 0x0f99, 0xffcf, 0x1006, 0x3a99, 0xc818, 0x72e0,
    0xb8f6, 0xd94a, 0xbadc, 0x1289, 0x4569, 0x721c, 0x6b00, 0x33c5, 0xacf5, 0xe194, 0xf992, 0x342b, 0x17af, 0x0c27, 0x0f83, 0xe8c0,
    0x233a, 0x88fc, 0xc9c2, 0xbb58, 0x1980, 0x0d93, 0xd6ad, 0x4d36, 0x1259, 0xe8e2, 0x1e0d, 0x1097, 0x35b2, 0xebf2, 0xbaab, 0x1e07,
    0xff7d, 0xfc47, 0x6872, 0x4fdb, 0x9113, 0x6673, 0xd294, 0xb628, 0x4b1a, 0x7e55, 0x9476, 0xfff4, 0xe054, 0xe2d3, 0x4e02, 0x64b8,
    0x605d, 0x1689, 0xc4fc, 0x8c02, 0x6ede, 0xeef2, 0x2d4b, 0xc8e9, 0xf3ee, 0xb96e, 0x96bc, 0x90cf, 0x7f98, 0x495d, 0x35fd, 0xd09c,
    0x7c4f, 0x7d17, 0xc952, 0x02c8, 0x5150, 0xedc7, 0xd45e, 0x5235, 0xdd4f, 0xb520, 0xf358, 0x5b06, 0xfebc, 0x44ab, 0xd629, 0x3f69,
    0xf4ac, 0xb5a5, 0xbbc6, 0xb6e5, 0x3aee, 0x95db, 0xfb8e, 0x6cdb, 0x8e08, 0x7a95, 0x8c50, 0xb0a7, 0x2115, 0x8c8a, 0xb527, 0x93d1,
    0x9a95, 0xb2dc, 0xa4c3, 0xae08, 0xd633, 0xac50, 0xd0a7, 0xa006, 0xe41d, 0xd527, 0xb3d1, 0xcb20, 0xac8a, 0x6e5e, 0x6ade, 0x4115,
    0x26b1, 0x1b8f, 0x8cdb, 0x347d, 0xb5db, 0xa14e, 0xb0ee, 0x5aee, 0xd5a5, 0xb196, 0x34ba, 0x14ad, 0xc9ea, 0xdbc6, 0xd6e5, 0x9448,
    0x0609, 0xf45e, 0x7235, 0x38d2, 0x0dc8, 0x8533, 0xc553, 0x7150, 0x9d17, 0x1548, 0x9824, 0x9c4f, 0x2c1a, 0xe952, 0x22c8, 0x8ab7,
    0xd520, 0x62c0, 0x8a78, 0xfd4f, 0xc1f9, 0x1359, 0x7b06, 0xf551, 0x251d, 0xf629, 0x5f69, 0x517c, 0x64ab, 0x832f, 0x8065, 0x1ebd,
    0x5f05, 0xf294, 0xd628, 0x8230, 0x8673, 0x7c0d, 0x0d82, 0xb113, 0x1c48, 0x88c6, 0x5796, 0x1f7e, 0xf63d, 0x8872, 0x6fdb, 0x20b3,
    0x9e55, 0xb531, 0xa412, 0x6b1a, 0xc18d, 0xb476, 0x1ff5, 0xb175, 0xb345, 0x6e02, 0x84b8, 0xf068, 0x02d4, 0x0374, 0xe54b, 0x0055,
    0xd96e, 0xd7ab, 0x91a0, 0x13ef, 0x652c, 0xb6bc, 0xb0cf, 0x2e61, 0xeec6, 0x55fd, 0xf09c, 0xc06d, 0x695d, 0xbb7e, 0x8051, 0x9f98,
    0x20c4, 0x4d4b, 0xe8e9, 0x3dc6, 0x0ef3, 0x703a, 0x893c, 0x8ede, 0x3689, 0x8d64, 0x55c2, 0x805d, 0x47e7, 0xe4fc, 0xac02, 0x5f3a,
    0x58a8, 0x5225, 0xc998, 0x02aa, 0xf975, 0xd91a, 0x3c69, 0x3a50, 0xea75, 0x653c, 0x1ea8, 0x0b02, 0x1aa9, 0x2f6a, 0xda3b, 0x5d83,
    0x47a0, 0x1475, 0x3ee3, 0x5926, 0x676f, 0xf499, 0x25a4, 0x649e, 0xb730, 0xe5cb, 0xd483, 0xf867, 0x4593, 0x68d0, 0xa9f7, 0x60c7,
    0x270a, 0x34d8, 0xe747, 0xfce4, 0xb342, 0x2f99, 0x1fd0, 0xfb4b, 0x64b2, 0xe818, 0x92e0, 0x51d9, 0x5a99, 0x11c6, 0x4e0c, 0x3006,
    0x4963, 0xafca, 0x65d2, 0xd5e5, 0xc985, 0xe2e9, 0xc7df, 0x9c60, 0xcfb0, 0x612e, 0x99cc, 0xfdf6, 0x7c1a, 0x4f2b, 0xc88f, 0xa233,
    0x08e3, 0xad4c, 0x740c, 0x3259, 0xa795, 0x3e0d, 0x3097, 0x67d8, 0x6d6e, 0xdaab, 0x3e07, 0x7ca5, 0x0bf3, 0x9613, 0x97c1, 0x55b2,
    0x83e3, 0xf6ad, 0x6d36, 0x0d9a, 0x2d93, 0x0a6d, 0x8e44, 0x3980, 0xa8fc, 0x245d, 0x08f7, 0x433a, 0xdfa7, 0xe9c2, 0xdb58, 0x8654,
    0x07e6, 0x8b00, 0x53c5, 0x5071, 0x921c, 0xf711, 0xa6f1, 0x6569, 0xf94a, 0x7c0e, 0x2319, 0xd8f6, 0xb557, 0xdadc, 0x3289, 0x3d9d,
    0x0195, 0x45f0, 0x7a03, 0xccf5, 0x2053, 0x1993, 0x542b, 0x989b, 0xab64, 0x2f83, 0x08c1, 0x3607, 0x2c27, 0x17e6, 0x47da, 0x37af,
    0x4c3a, 0xe08a, 0x635f, 0x57cd, 0x756f, 0xbab5, 0xa707, 0x32da, 0xa108, 0xd323, 0x2f13, 0xa590, 0x448a, 0xfce1, 0x19e9, 0xd365,
    0x2b73, 0x6983, 0x414c, 0xde5c, 0x65b3, 0x8a24, 0xc512, 0x226e, 0x8315, 0xdb3a, 0x5a5d, 0x196b, 0xd11b, 0x1ee5, 0xc7b5, 0xca56,
    0xf13e, 0x091a, 0x85d3, 0x4fbf, 0xa3ac, 0x15ba, 0x6bcb, 0x52c6, 0x8fae, 0xd059, 0xcaaf, 0x6349, 0xf7ed, 0x7194, 0xdc20, 0x863a,
    0xd951, 0xe092, 0x825c, 0xf398, 0x34c2, 0x3e9f, 0x0467, 0xb834, 0x32a6, 0x5082, 0x48d6, 0x9368, 0xf3a5, 0xc02a, 0xac99, 0xcbb3,
    0x23db, 0x1951, 0xa80d, 0x3ab8, 0xa2bf, 0xa52b, 0x3867, 0xd7c0, 0xd430, 0xa170, 0xed2e, 0x9d1e, 0x6f8e, 0xe203, 0x0e48, 0xccb5,
    0x0f8d, 0x29b3, 0x5d5b, 0x3aed, 0xccf4, 0x71d5, 0x19a2, 0xc5b5, 0xddf3, 0x6e92, 0x4717, 0x92c8, 0xbe54, 0x5005, 0xd789, 0x49b2,
    0x5174, 0xa61d, 0xe38b, 0x5c18, 0xdb9d, 0xe3db, 0x63b2, 0x8964, 0x2bc5, 0x7511, 0xf6d8, 0x1923, 0xbbc4, 0x64d9, 0xc1c5, 0x826c,
    0xf045, 0x9501, 0x29b0, 0x8e8f, 0x0c65, 0x93eb, 0xb697, 0x2685, 0xda14, 0x265b, 0x78f3, 0xb691, 0x4724, 0x1a5f, 0xdd40, 0xcf15,
    0x0fe8, 0xfda5, 0xf3a3, 0x7e72, 0xe3ef, 0x4e30, 0x32e9, 0xeaf2, 0xd378, 0xb2b4, 0xa9e2, 0xa838, 0xaa15, 0xcc4d, 0xbd01, 0xe67a,
    0xc5f1, 0x0c2e, 0x4db2, 0x9244, 0xb2f9, 0x7d04, 0x16e9, 0x4b34, 0x5319, 0x4128, 0xfab8, 0x7540, 0x4138, 0x9246, 0x38eb, 0x4932,
    0xac00, 0x4a23, 0x9b64, 0x2489, 0xe446, 0xa6ce, 0x8be3, 0x185c, 0x1b34, 0xda6c, 0x433d, 0xd7f3, 0xed5b, 0x07c7, 0xb78a, 0xc822,
    0x5ebb, 0x8652, 0x2dd2, 0x9668, 0x5913, 0xf9c1, 0x65f3, 0xfa08, 0x7300, 0x1c89, 0x5a23, 0xbb78, 0x14da, 0x5b26, 0xb648, 0x6071,
    0x8035, 0xe299, 0x26e4, 0x4eb3, 0xa304, 0x2af9, 0x0ece, 0x9a2f, 0x8a90, 0x4546, 0x7e9b, 0x5160, 0xd5cc, 0xa9ac, 0x00fd, 0x680e,
    0x3062, 0x053f, 0x7bb0, 0xc6a5, 0xe3a4, 0x581d, 0xa779, 0x28ae, 0x986e, 0x7b5e, 0x5296, 0xce68, 0x8cb7, 0x1459, 0xb3d7, 0x0bd6,
    0x1823, 0x14cd, 0xf571, 0xea80, 0x9fb8, 0xe9f5, 0xa632, 0x8250, 0x8674, 0x11ee, 0x0dcf, 0xcd15, 0x48ba, 0x51f9, 0x3a70, 0xf30e,
    0x6091, 0x2add, 0x71d6, 0x9264, 0x989f, 0x5180, 0x8270, 0x248d, 0x0ca9, 0xb6b1, 0xc5d5, 0x9049, 0xd385, 0xbf4f, 0x3a61, 0x4fdf,
    0x40cb, 0x3164, 0xe55b, 0xf1b3, 0xee27, 0x7d7a, 0x5b68, 0x6c12, 0x48be, 0xf142, 0x0ef7, 0xcfb4, 0x98cf, 0xe032, 0xaf5e, 0xbb65,
    0xe02e, 0x465f, 0x19c6, 0x4ae1, 0x0957, 0x7601, 0x4f9d, 0xab04, 0x8738, 0xe028, 0x6fcc, 0xe0d7, 0x0037, 0xa475, 0xf7d3, 0x984e,
    0xfb48, 0xf5e6, 0xde2b, 0xdc79, 0xe361, 0x8ea0, 0x078b, 0xfa81, 0x7cfe, 0x00e3, 0x6136, 0x67ab, 0xac91, 0xd126, 0xaf1b, 0x9b6c,
    0x7ee7, 0x8e10, 0x631d, 0xce48, 0xd1a4, 0x2550, 0x74be, 0x0558, 0x69b4, 0x4e4c, 0x6f17, 0x446b, 0x33a8, 0xf64c, 0x05da, 0x4ed2,
    0xa912, 0x2c54, 0x6c8d, 0xfcba, 0x8a3a, 0x23d0, 0xfa4c, 0xb3b7, 0x56a6, 0x8471, 0x9f06, 0xd3ca, 0xfb56, 0xc1f1, 0x8536, 0x96c9,
    0xfed2, 0x07f4, 0x2718, 0xf1f7, 0x0617, 0xe2f8, 0x3e82, 0xd97c, 0xf14c, 0xc01a, 0x957c, 0x5182, 0x829f, 0x1831, 0xac0e, 0x71d2,
    0x96bb, 0xac3b, 0xa801, 0xf429, 0x889b, 0xb144, 0x8cb6, 0xe9c1, 0x2601, 0x76a5, 0x3b14, 0x1439, 0xbd1d, 0x7912, 0x02e9, 0x7795,
    0xf930, 0x4357, 0xad23, 0xb801, 0xa07b, 0x7c5d, 0xb904, 0x31e7, 0xb27a, 0xb6f1, 0xab22, 0x9b97, 0xf446, 0x47b9, 0x9122, 0x7f38,
    0xb57a, 0x3a0c, 0xd76a, 0x288e, 0x1bad, 0xd7cf, 0xcf72, 0x7742, 0x8354, 0x018b, 0x1a4a, 0x7d73, 0xad9d, 0x9a9c, 0xc0de, 0xfb40,
    0xbd3f, 0x27b8, 0x3e71, 0x9260, 0xaaec, 0xc4e9, 0x1775, 0x6245, 0x2992, 0x2f8f, 0x84e6, 0xafe9, 0x9680, 0x9084, 0x173c, 0xba76,
    0x9ef8, 0x2efa, 0x2765, 0x4eac, 0x7749, 0x741f, 0x1272, 0x4e56, 0x59f7, 0x84ae, 0x502a, 0x9f2a, 0xfc92, 0x72c9, 0xe802, 0xe384,
    0x90b8, 0x2efd, 0x3cfa, 0x6168, 0x26f7, 0xaa18, 0xfd0f, 0x0602, 0x7de8, 0x410b, 0x3102, 0x521e, 0x21aa, 0x2d4e, 0x2b40, 0x77c7,
    0x51b5, 0x784a, 0x772f, 0x759e, 0x42a1, 0x0e18, 0x5335, 0x9645, 0x2a94, 0xe43c, 0x2132, 0xeaa7, 0xa204, 0x320f, 0x61d1, 0xbe69,
    0xadba, 0x7a8a, 0x6885, 0xa4f5, 0x1024, 0xf34c, 0xade3, 0xf8e3, 0x3bd1, 0x2ad3, 0x0d3c, 0x051f, 0x98cb, 0xc216, 0x94a6, 0xb145,
    0x8463, 0x3fab, 0x227f, 0xc544, 0x24f7, 0x4e24, 0xdf4b, 0x17a8, 0xda35, 0x19df, 0x8439, 0xb114, 0xef6c, 0xb657, 0x9e1f, 0x3b1f,
    0x58de, 0x19a3, 0x00ed, 0xed34, 0x7701, 0xfa32, 0x27a7, 0x7b90, 0x6a67, 0x92be, 0x9fba, 0x416a, 0x439f, 0xa1df, 0x41ba, 0x4cca,
    0x0f54, 0x0581, 0xed1d, 0xaec1, 0xea41, 0xfc33, 0xd4fb, 0xb063, 0x9f03, 0xbe52, 0xcbe0, 0x2ad9, 0x847b, 0x219d, 0x6dac, 0x432a,
    0x54f1, 0x541c, 0xde80, 0x733d, 0x7d5c, 0x3aa0, 0x9c75, 0x2499, 0xbf4d, 0x28b0, 0x807e, 0x3407, 0x294b, 0x6734, 0xd9eb, 0x05eb,
    0xa904, 0x9ac6, 0x358a, 0x208c, 0xd756, 0x4ebb, 0x6a03, 0x0eae, 0xfd76, 0xbad2, 0x9e27, 0xd6e3, 0x82b4, 0x4ca5, 0xf19c, 0x66c9,
    0xb7db, 0xbc3b, 0x5d1f, 0xb3a0, 0x308c, 0xfec2, 0x42db, 0x9360, 0x9b80, 0x6cd1, 0xa231, 0x0712, 0x9ba4, 0xf77c, 0x285c, 0x350c,
    0x360d, 0xc289, 0x5690, 0x94a9, 0xaf5a, 0x2aa4, 0xee8b, 0x9267, 0x3bf8, 0x1b15, 0xb28e, 0xe856, 0xd255, 0x958b, 0x7137, 0xe197,
    0xcf2e, 0x66b2, 0xbb44, 0x4e93, 0xc3f3, 0x63e7, 0x62b8, 0x927e, 0xd4ae, 0xc024, 0x7326, 0x7dbf, 0x483f, 0xcafe, 0x9763, 0x80a6,
    0xfcac, 0xb32d, 0x8d0a, 0x11b0, 0x4392, 0xe23e, 0xcc3c, 0xad2f, 0x7de2, 0x3412, 0xdcd9, 0xd26c, 0x0be7, 0xda88, 0xb5e2, 0x84e4,
    0x1bf7, 0xff7c, 0x796d, 0x58ca, 0x0e17, 0x082d, 0x67d7, 0x0ecd, 0xf226, 0x4841, 0x3953, 0xfb0e, 0x19d3, 0x3384, 0x4469, 0x8015,
    0xd1f6, 0xef8b, 0xb003, 0xeadb, 0xb40f, 0x0dec, 0xe7a8, 0x9a47, 0xbb61, 0x02d1, 0x8ca2, 0xe105, 0xb9f4, 0x4854, 0x21c3, 0x8f67,
    0xfd58, 0x13f8, 0x592f, 0x3262, 0x8e98, 0x4fc8, 0xc6ae, 0x7e7b, 0x6171, 0xc54d, 0x4aea, 0xfcc3, 0xb704, 0x9dfa, 0x4e9c, 0xaeca,
    0xfa3e, 0x5bda, 0xa35d, 0x9df1, 0x9d07, 0xa741, 0x76af, 0xd283, 0x9deb, 0xf4b7, 0xbf0c, 0xbb89, 0xbdf4, 0x817a, 0xadf7, 0x266e,
    0xa67d, 0xb877, 0xf381, 0x9309, 0xafb7, 0xa31e, 0xf439, 0xfa1d, 0x0ed0, 0xd34e, 0x0427, 0x4526, 0x84bb, 0xd739, 0x8d77, 0xcb6d,
    0x6b8d, 0xc0ab, 0x1762, 0x80f7, 0x082e, 0xdb0c, 0x38bb, 0x608d, 0x8dee, 0xeffa, 0xa784, 0x551b, 0xae4f, 0x9431, 0x383c, 0xd5ac,
    0xf051, 0xc0d3, 0xa3ce, 0xe317, 0x0990, 0x21e6, 0x1707, 0xb209, 0x958d, 0x4c04, 0xc786, 0x2e4a, 0x3a20, 0x0943, 0x889c, 0x339b,
    0x23c2, 0x3d86, 0xabc3, 0x67ee, 0xa118, 0x4f61, 0xba7d, 0x2f29, 0xa9e8, 0x2628, 0x0d83, 0xcb14, 0x5460, 0x5cc9, 0x684b, 0xbd55,
    0xc5b6, 0x6213, 0xbdc4, 0xb6fb, 0xbeaa, 0x66c1, 0xb787, 0x6487, 0x0665, 0x2fdd, 0x388a, 0xaf0f, 0x51c2, 0x0815, 0x090f, 0xf59f,
    0x4206, 0xef0f, 0xbd8f, 0x0ff4, 0x788a, 0x4ffd, 0xa380, 0xe21c, 0x40b5, 0x0aaa, 0x6874, 0x6fdd, 0x15cf, 0x40dd, 0x4665, 0x7bfa,
    0x490f, 0x3b35, 0x0e6e, 0x3881, 0x025f, 0x35a0, 0xdbe3, 0x9ddb, 0xdc2a, 0x9401, 0x91c2, 0x743c, 0x6f95, 0xcfc6, 0x179d, 0x4815,
    0x4293, 0x4bdb, 0xd677, 0xa213, 0xe042, 0xe6bb, 0x05b7, 0x986a, 0xca38, 0xf6fb, 0x3337, 0x9d6c, 0xfdc4, 0x4faf, 0x3d48, 0x7f86,
    0x696a, 0xd425, 0xfeaa, 0x6377, 0x858a, 0x5522, 0x3851, 0xa6c1, 0xf787, 0x2103, 0xa7fe, 0x3c45, 0x9d9a, 0xa487, 0x1ad0, 0x812f,
    0xa84b, 0xd2d4, 0xbc8e, 0xaf06, 0xc6ee, 0xfd55, 0xaf03, 0x68b3, 0xb4f2, 0xa7c1, 0x9460, 0x255f, 0xba15, 0xaca3, 0xdf6f, 0x9cc9,
    0xaa44, 0x0b15, 0xbfb4, 0x01fd, 0x4d83, 0x70a2, 0xb3cb, 0x99ac, 0xf853, 0xcf7d, 0x0224, 0x6628, 0x5ca2, 0xfa93, 0xe9e8, 0xc63d,
    0x9637, 0xc668, 0xe118, 0xcfea, 0xb16d, 0xd884, 0x88f0, 0x8f61, 0xfa7d, 0x9c2e, 0x405f, 0x0e1a, 0x5e2d, 0x6f29, 0x75f0, 0x6e05,
    0xac5d, 0xe164, 0x0973, 0x7d86, 0x06ab, 0x87fd, 0x63c2, 0xd2fc, 0x905a, 0xa7ee, 0x2c45, 0x610e, 0xebc3, 0x8e22, 0x32c5, 0xc360,
    0x995a, 0xc611, 0x14fa, 0x00d4, 0x9fd8, 0xa9bc, 0x3052, 0x8ab0, 0xcd14, 0x2318, 0x2627, 0xda34, 0xe3ce, 0xf15e, 0x44aa, 0x150b,
    0xc219, 0xe98c, 0x4990, 0xd5c5, 0x6094, 0x5f25, 0x697d, 0x61e6, 0x5707, 0x01b5, 0xdfc7, 0x609c, 0xf995, 0xf209, 0x8923, 0x64d2,
    0x7721, 0x6e4a, 0x94d6, 0x3bf1, 0x0787, 0xb59a, 0xfcb2, 0xaae6, 0x62a3, 0x7f07, 0x0057, 0x8c04, 0x8a5a, 0x8548, 0xd58d, 0x2621,
    0xc89c, 0xcf4e, 0x19f3, 0x065c, 0xd776, 0x739b, 0xca2c, 0x9f23, 0x8eb8, 0x8c37, 0x7a20, 0x0ef0, 0x7daf, 0x23e2, 0xae6f, 0x4943,
    0x2b54, 0x9b98, 0x482e, 0xcaa0, 0x32e6, 0x85b0, 0xaf35, 0x1b0d, 0x78bb, 0x235a, 0x1026, 0xe2c9, 0x9133, 0xa08d, 0x7468, 0xdd6f,
    0x729e, 0xdb2e, 0x234a, 0x00ac, 0x0f49, 0x353b, 0xab8d, 0x1282, 0xe577, 0xc0f7, 0x57b5, 0xdcda, 0x5762, 0x7f4a, 0x9165, 0xcd54,
    0x783c, 0xec21, 0xc588, 0x2fd4, 0x7466, 0x15ad, 0xb4e1, 0xc7bf, 0xef4a, 0x947e, 0xee4f, 0x7b5a, 0xd22e, 0xa813, 0x06e1, 0xd431,
    0x398d, 0x951b, 0x0b0a, 0x286b, 0xe784, 0x6e03, 0x5f26, 0xc5f9, 0x2d56, 0xdfef, 0x1f89, 0x2ffb, 0x237f, 0x76b7, 0xcdee, 0xf90a,
    0xedf7, 0x9471, 0xa92c, 0xf596, 0x3ad9, 0x666e, 0x09f2, 0x95f9, 0xabd7, 0x6ed9, 0xfdf4, 0xa613, 0x1b6b, 0x90ca, 0xf67a, 0xc17a,
    0x9f5e, 0xfb89, 0x5d80, 0xc255, 0xff0c, 0x7a90, 0x0ea8, 0x1f57, 0x9c01, 0xdd4a, 0x6704, 0x34b8, 0xb08a, 0x5230, 0xddeb, 0x6645,
    0x2a86, 0xc9bd, 0xdd07, 0x5dd2, 0xa8c7, 0xebed, 0x69d0, 0xe741, 0xb6af, 0x17aa, 0xe760, 0x5156, 0x3195, 0x1284, 0x860a, 0xd23d,
    0x8a9d, 0xc5c6, 0xd07b, 0x9bda, 0x7ad6, 0xca70, 0x3a3f, 0xe727, 0x0ad0, 0xddf1, 0xba00, 0x38e1, 0xe35d, 0x72db, 0xeb7d, 0x899b,
    0x97b6, 0x8526, 0xfd20, 0xfb2b, 0x4427, 0xacef, 0x0d1b, 0x35af, 0x7c51, 0x695f, 0xd533, 0x134f, 0xc1cf, 0x9692, 0x4ed0, 0xf0ef,
    0xcd77, 0xc085, 0x5ef4, 0x0906, 0x30d5, 0x0b6e, 0x5954, 0x36a7, 0x9e49, 0x2fba, 0xc4bb, 0xd964, 0x4a7f, 0x6257, 0xccfb, 0x173a,
    0xea99, 0x89a7, 0x2768, 0xf877, 0xe25d, 0x6cb2, 0xe67d, 0x0b9d, 0x7efa, 0xd309, 0x7b3d, 0x60bd, 0x3382, 0x1a5c, 0xeef5, 0xb322,
    0x4a30, 0x92af, 0xefb7, 0xce64, 0x0112, 0x3314, 0x74f4, 0xe31e, 0x343a, 0xb7ee, 0xa332, 0x3dfd, 0x48e1, 0x3a1e, 0x8bce, 0xa40a,
    0x5371, 0x5c58, 0xf40f, 0x8fbd, 0xd22d, 0x6896, 0x463b, 0x4dec, 0x27a9, 0xb977, 0xd04e, 0xeff0, 0xaf37, 0xda47, 0x70c1, 0x891b,
    0xd530, 0x6e0b, 0xe821, 0x2f8c, 0xa179, 0xdb43, 0x11f7, 0x1c92, 0x0194, 0x2adc, 0x00ec, 0xb6fa, 0xf003, 0xc556, 0x341b, 0x6cda,
    0x61c3, 0x81da, 0x3745, 0x080c, 0x25e3, 0xcf67, 0xcc17, 0x22f2, 0x6472, 0x9140, 0xf9f4, 0x11a6, 0xad80, 0x41cc, 0xa8a5, 0x8854,
    0x5a6a, 0x2106, 0x58f4, 0xd793, 0xcca2, 0x39f2, 0xf792, 0xe1ce, 0xcc0b, 0x8fe4, 0xf6ee, 0x42d1, 0xe898, 0xfa44, 0xfb61, 0x5292,
    0xab23, 0xc239, 0x7dcf, 0x53f8, 0x7486, 0xee11, 0x3d59, 0x78db, 0x4da3, 0x7262, 0x0cff, 0x907a, 0x992f, 0x42b3, 0x15ef, 0x3cee,
    0x7af6, 0x7ac1, 0xce98, 0x9c21, 0x1e66, 0x97d6, 0x33a2, 0x8fc8, 0x06af, 0x8ebc, 0xd26d, 0x2a8a, 0xd24d, 0xbe7b, 0xd671, 0x6492,
    0x3201, 0x3cc4, 0xf80a, 0x3433, 0x8aea, 0x31bd, 0x0e52, 0x1c83, 0xe4fe, 0xb5a7, 0x2d3e, 0x054e, 0xd269, 0x6897, 0xa171, 0x8eb5,
    0x8e9c, 0xd4b2, 0x98d3, 0x51b9, 0xb346, 0xeeca, 0xf3a9, 0x6095, 0x2321, 0xc100, 0xf704, 0xa7f7, 0x726b, 0x2ae5, 0xd312, 0xddfa,
    0xd0a0, 0x8c9d, 0x5733, 0xa6b2, 0x4308, 0x0de7, 0x0f2f, 0x828d, 0x6075, 0x8e93, 0x7154, 0xd8fa, 0xfb44, 0xfcbe, 0x249d, 0x2e4e,
    0x648e, 0xf434, 0x03f4, 0xa039, 0xe9ee, 0xd349, 0x8773, 0xa3e7, 0xa2b8, 0x9de6, 0xbd0b, 0x43c6, 0x53ac, 0xd27e, 0x46fb, 0x78e2,
    0x98bd, 0xbdbf, 0xbfd9, 0x5861, 0xb326, 0x0810, 0xc5fd, 0x3c49, 0x6b86, 0x545b, 0x0027, 0x0025, 0x8a69, 0x67e9, 0x14af, 0x45d4,
    0xd763, 0x3837, 0x6ac2, 0xc5ad, 0x3e3a, 0xc0a6, 0xac7f, 0x0149, 0x13fe, 0xf04c, 0x883f, 0xfc6f, 0xdc72, 0x3396, 0x130c, 0x0aff,
    0x2658, 0x394e, 0xef5a, 0x0bd2, 0x70b1, 0x0828, 0xbda8, 0x6aa4, 0x2e8c, 0x438d, 0x7723, 0x50f8, 0x9dbd, 0xd267, 0xbd41, 0x38f5,
    0xd492, 0xee86, 0x036c, 0x028a, 0xa1f2, 0x1b10, 0x760d, 0x68ef, 0x08a7, 0xd4a9, 0x655d, 0x2181, 0x9690, 0x9279, 0x6a14, 0x98b9,
    0xb137, 0xed18, 0xe6f2, 0x620a, 0xf251, 0x2198, 0x50d9, 0xbf62, 0x9f44, 0x2946, 0x1256, 0xb8c1, 0xbc2c, 0x7338, 0xfc80, 0xd58b,
    0x9598, 0x2857, 0x087d, 0x966e, 0xf28e, 0xbc36, 0x17f9, 0xbffe, 0xad8b, 0xa8ff, 0x0fc0, 0x5b15, 0x98b3, 0x66c4, 0x7bf8, 0x5888,
    0x2bd4, 0x3b0f, 0x9504, 0x0fa6, 0x7953, 0xb13f, 0x82a2, 0xb9ab, 0xd870, 0xa076, 0x969a, 0x8841, 0x5dc8, 0x9b92, 0x3227, 0xb3d3,
    0x8469, 0x3e7d, 0x50b4, 0xbdbb, 0x2301, 0xc015, 0x03bc, 0x1e88, 0x472b, 0x56a1, 0x59d3, 0x2939, 0x74ea, 0xb3b2, 0x4756, 0x7384,
    0x0d2e, 0x19c1, 0xe984, 0x3f7d, 0x1d0f, 0xa470, 0x5bf7, 0x1a1d, 0x0942, 0x98ca, 0x0bd5, 0xdb57, 0xb96d, 0xf1ae, 0xeef8, 0x0568,
    0xb794, 0xaf16, 0x4e17, 0xfd3e, 0x4711, 0xf5e1, 0x53f7, 0x482d, 0xa7d7, 0x7ee2, 0xfb7d, 0x651c, 0xd243, 0x4ecd, 0x9081, 0xfbc3,
    0xf5e2, 0x84e1, 0x7dac, 0xb6f2, 0x469b, 0xc4e4, 0x874d, 0x0b57, 0xb9e2, 0x1ba8, 0x4be7, 0x5580, 0xd2f2, 0x7d6e, 0xa944, 0x1a89,
    0xc91a, 0x126d, 0x2bed, 0x8a2f, 0x1cda, 0x84a9, 0x2164, 0x2042, 0x5e98, 0x7de3, 0xfb72, 0x7412, 0xd66d, 0x05fd, 0xbde2, 0x9dc7,
    0x2ac5, 0x227a, 0x8392, 0x5d63, 0xae3d, 0xb652, 0x88ce, 0x223f, 0x0c3d, 0x439a, 0xfcf5, 0xcf50, 0x7f40, 0xed2f, 0x463c, 0x3a0e,
    0xaed7, 0x94a1, 0x544e, 0xf32d, 0x61e7, 0x7a85, 0x3cad, 0xf069, 0xe5e1, 0x51b0, 0xc62e, 0x2ec3, 0xcd0a, 0xbe64, 0xc425, 0x4783,
    0xdd7d, 0x5791, 0x2a42, 0x1519, 0xa0be, 0x7c08, 0x9cd7, 0x3c34, 0x14fc, 0xc188, 0xf0fd, 0x585d, 0x3cfc, 0xf063, 0x5a87, 0x8929,
    0xd8c4, 0x8937, 0xfa6d, 0x4581, 0x39ef, 0x8d5f, 0x4f54, 0x8cb3, 0x1a97, 0xeec1, 0xc2ac, 0xb3e1, 0x2d1e, 0x2e5c, 0x3903, 0xb710,
    0xadac, 0x8a73, 0xb545, 0x66b8, 0xb920, 0x832a, 0x4508, 0x1e99, 0x5d53, 0x2c15, 0xc47b, 0x1135, 0x87b2, 0x38cd, 0x12c7, 0x619d,
    0xb587, 0x6ad9, 0x16b9, 0xf847, 0x0be1, 0xb2d7, 0x121a, 0xfc0a, 0xdc5a, 0x26ac, 0xf665, 0xfe52, 0xefb1, 0x9443, 0xdf03, 0xdf95,
    0xac78, 0x99c7, 0x1aeb, 0x941c, 0xd249, 0xe2e4, 0x94f1, 0xa9d7, 0x7c6c, 0xb33d, 0x0a0d, 0xc9d8, 0x1e81, 0x51d4, 0x0107, 0xfa5f,
    0xd0bb, 0x3c64, 0xbd5c, 0x2961, 0x7505, 0x6537, 0x2c08, 0x7aa0, 0xdc75, 0xb72b, 0x6c61, 0x3c7f, 0xfb8c, 0x6499, 0xee9e, 0x9d34,
    0xa4e7, 0x7407, 0xcb8f, 0x236e, 0xc07e, 0x960e, 0x3565, 0x02c2, 0x8e95, 0xdfa2, 0x4ba5, 0x68b0, 0xf62b, 0x0d95, 0xff4d, 0xb1a2,
    0x19ec, 0x47d5, 0x3de4, 0xbea1, 0xdc7c, 0x45eb, 0x6c46, 0x8b39, 0x0490, 0x07e1, 0x694b, 0x2bcc, 0x387a, 0x3d98, 0x9207, 0xa734,
    0x319d, 0x4338, 0xe1a5, 0x647e, 0xd5ba, 0xa6c9, 0x2cc0, 0x8f75, 0xbe77, 0x590e, 0xc2b4, 0xfb4e, 0x7c7b, 0xbb73, 0x96d7, 0x8ca5,
    0x55c0, 0x16e4, 0x48a8, 0x5d91, 0xde27, 0x4123, 0x20c1, 0xde8b, 0x9a56, 0xd373, 0xccc3, 0xfad2, 0x681c, 0xeaed, 0x3d77, 0xe688,
    0xadd5, 0x7bab, 0x1757, 0x4126, 0xfb71, 0x1454, 0xe576, 0x8ebb, 0xaa03, 0xd5c7, 0x76ca, 0xefa6, 0x0e32, 0x4eae, 0xa24c, 0x674f,
    0x2725, 0x3a6b, 0x32a4, 0xdac6, 0x64c6, 0x14c8, 0xe904, 0xb491, 0x5334, 0x608c, 0xa794, 0x2af8, 0x758a, 0x4fda, 0xed49, 0x64f4,
    0xa4c9, 0x4712, 0xb27b, 0xe0f9, 0xe231, 0x71d0, 0x37c3, 0xbfd5, 0x4c6f, 0xa2ba, 0xbbb2, 0xacd1, 0x456b, 0x9d19, 0xdb80, 0x39e1,
    0x685c, 0x63ad, 0xb4c4, 0xb77e, 0x41b8, 0x750c, 0xb37b, 0xbe42, 0x3413, 0xda0f, 0xdba4, 0x1455, 0x6f7c, 0x2680, 0x53b6, 0x377d,
    0xf33e, 0x85ce, 0x13b4, 0xfc3b, 0x3a7a, 0x718f, 0xf7db, 0x6732, 0x34e8, 0xf3a0, 0xee83, 0x2ee9, 0x9d1f, 0xf393, 0xe83d, 0x4ded,
    0x4478, 0xc7b0, 0x708c, 0x67f5, 0x31e1, 0x697e, 0x84b9, 0x3ec3, 0x82db, 0x4c35, 0xeb3b, 0xd109, 0x9c28, 0xd360, 0x7f55, 0xb1bb,
    0x2803, 0xb855, 0x567c, 0xbd4c, 0xe878, 0x2385, 0x8e72, 0x97a1, 0x8228, 0x33d0, 0x3c93, 0x5f74, 0xc063, 0x08f5, 0x8977, 0xb2c9,
    0x9f8d, 0xdf2a, 0x458d, 0x86e5, 0x902a, 0x2f3a, 0xa34e, 0x116a, 0x5fcc, 0xe981, 0x94fe, 0xc4ae, 0x805b, 0x7cb7, 0x99f7, 0x2e74,
    0x76f3, 0x7797, 0xb749, 0x28aa, 0x5053, 0xc63f, 0x6826, 0xb41f, 0x5272, 0xb3a6, 0xfdd3, 0x95f3, 0xad42, 0x8e56, 0x18d8, 0x5317,
    0x2337, 0xf4f8, 0xa76c, 0x6efa, 0x5538, 0x8d1f, 0xdef8, 0x4d00, 0xe708, 0x8eac, 0x2931, 0x767f, 0x6765, 0xe9d4, 0x5080, 0x6b82,
    0x766a, 0x921e, 0x354a, 0x92cb, 0x7102, 0x1cdc, 0x7a72, 0xb907, 0xec65, 0xac0c, 0x9aef, 0x810b, 0xcba9, 0xb569, 0xbde8, 0x120c,
    0x6b40, 0x04be, 0x93b8, 0x6842, 0x3bb7, 0xb7c7, 0x34c9, 0xd3ba, 0x4cc8, 0xa0c5, 0x61aa, 0x16dc, 0xf6ce, 0x657b, 0xb2a8, 0x6d4e,
    0x7b82, 0xd3fb, 0x6989, 0x6efd, 0x169f, 0x02a7, 0xd0b8, 0xc75a, 0x7b77, 0xa168, 0xfdb0, 0x2949, 0x7cfa, 0x08d3, 0xd452, 0x442a,
    0x8fc4, 0x97fd, 0x66f7, 0x7c85, 0xf727, 0x3dad, 0x8370, 0xea18, 0x3d10, 0x0778, 0xd737, 0xa4a1, 0x802b, 0x4602, 0xeac6, 0x9310,
    0x9124, 0x6c93, 0x5bad, 0x6c9a, 0xdf71, 0x6d9b, 0x8683, 0x17d0, 0x0f73, 0xc505, 0x44e2, 0x724f, 0x7594, 0xb742, 0x52d2, 0xf839,
    0xa4cc, 0xa41b, 0xe750, 0x7a0c, 0xa816, 0x4155, 0xf57a, 0x2ddb, 0xd773, 0x688e, 0xde34, 0xad2c, 0x176b, 0x5938, 0x8d13, 0x5d28,
    0x00df, 0x91b1, 0xc762, 0x5cc0, 0xc3bf, 0x3b41, 0x8722, 0x6287, 0x7b9b, 0x46cd, 0xed9d, 0xcaf6, 0x769b, 0xda4d, 0x6551, 0xda9c,
    0x96fe, 0xbd73, 0xd84b, 0x9f66, 0x5a4a, 0x073f, 0x6fe5, 0x73ec, 0x7a06, 0x4510, 0x9990, 0x418b, 0x339e, 0xd92c, 0xc354, 0x2db8,
    0x39d2, 0x0adb, 0xf769, 0x67b8, 0x78a7, 0x7f39, 0xfd3f, 0x1da5, 0x0853, 0xd260, 0xd974, 0x7a46, 0x7e71, 0xc997, 0xef8a, 0xb579,
    0x6cd9, 0x8922, 0xeaec, 0x74e9, 0x66d9, 0xde33, 0x8bb4, 0x04ea, 0x5775, 0x0e3c, 0xd36d, 0x659a, 0x1758, 0xa245, 0xcb74, 0xb5e3,
    0x1995, 0xefe9, 0x4767, 0xe555, 0xc4e6, 0x0688, 0x6755, 0x0d18, 0x5372, 0x0bb9, 0x776e, 0x6f8f, 0xf772, 0xe759, 0x6992, 0xa775,
    0x573c, 0x0375, 0xe98d, 0x5457, 0x1af4, 0xfa76, 0x13bd, 0x32ad, 0x1503, 0x2353, 0xd680, 0x097c, 0x7dd8, 0xe82a, 0x2771, 0xd084,
    0x1554, 0x816a, 0x381f, 0x3099, 0xdfba, 0xd0e8, 0xff34, 0x3caf, 0xd1d7, 0x6a53, 0xf8a2, 0xd2be, 0xa28f, 0x20d6, 0xaa67, 0x269e,
    0x81ba, 0x2b9e, 0x7d3b, 0x0d7a, 0xf7f4, 0x8cca, 0x0344, 0x6273, 0xdeb9, 0x4b7f, 0x839f, 0x2d25, 0xc8d8, 0x806f, 0x9da0, 0xe1df,
    0x6a59, 0x474e, 0x7765, 0x59a3, 0x1e62, 0x9900, 0x98de, 0x4575, 0x1083, 0x2d35, 0x1cf9, 0x6651, 0x40ed, 0xb0e1, 0xe7b3, 0x92f1,
    0xca8d, 0x9cc6, 0xb701, 0x73c2, 0xf610, 0x3c1e, 0x8ad6, 0x3a33, 0x67a7, 0x644e, 0xb9cd, 0x6bbb, 0x3725, 0xbb90, 0x5acd, 0x83c3,
    0xde1f, 0x840c, 0x5970, 0xcb0b, 0x1fe8, 0x7b1f, 0xae2a, 0xa7cc, 0x22d2, 0x0686, 0x2f6d, 0x0a4d, 0x163b, 0x02e6, 0xfa41, 0xf657,
    0x9ffa, 0xf114, 0xb871, 0x6a3b, 0xc439, 0x4701, 0x525c, 0xf0c3, 0x7100, 0xbafe, 0x884e, 0x59df, 0xe867, 0xb187, 0x1a36, 0x6b5e,
    0x415c, 0x11e3, 0x64f7, 0xc1f3, 0x25c3, 0x7012, 0x4993, 0x8e24, 0x1f4c, 0x2a09, 0xfe6c, 0x0021, 0x761e, 0x57a8, 0xc71e, 0x811f,
    0xbe00, 0x0a5c, 0x6f86, 0x7fab, 0xcb57, 0x18ab, 0xc463, 0xe3a0, 0x7357, 0x0545, 0xff32, 0x37e4, 0x627f, 0xf2a6, 0x3575, 0x7e41,
    0xe276, 0x600f, 0x5369, 0xba8a, 0x5bcf, 0xdfa0, 0xedba, 0xc76d, 0x3d16, 0xe4f5, 0x4c7e, 0x069c, 0xa885, 0x9d29, 0xe595, 0xdf87,
    0x580d, 0xcbac, 0x5024, 0x1c99, 0x4c6d, 0x9567, 0x8e37, 0x334d, 0xede3, 0x8776, 0xd770, 0x66da, 0xd28a, 0x38e4, 0xb072, 0x273b,
    0x41ac, 0x451f, 0x3982, 0x8634, 0x4d3c, 0x54cf, 0x2241, 0x0023, 0x8e7a, 0x79a4, 0x9753, 0x6ad3, 0x03d1, 0x8077, 0x7bd1, 0x2418,
    0xd4a6, 0xa3af, 0x4b70, 0xa9df, 0xa57d, 0xf145, 0x9698, 0xd6ef, 0x9397, 0x92b7, 0xd8cb, 0x5819, 0x4067, 0x136b, 0x35df, 0x0217,
    0x9fd7, 0x6895, 0x82a1, 0x8f74, 0x9123, 0x600e, 0x5e2f, 0x4e18, 0x9335, 0x7679, 0xe6d4, 0x8b2a, 0x3686, 0xd645, 0xa5bd, 0xefa3,
    0xc1cd, 0x2710, 0x0bb0, 0xb84a, 0x6452, 0x7042, 0x91b5, 0x08d7, 0x9c32, 0xb59e, 0xd4b6, 0x72df, 0xb72f, 0x4127, 0x84e5, 0xfcc2,
    0xa1d1, 0xbf75, 0x6ae8, 0x261f, 0x795e, 0xfe69, 0x4b8a, 0x187e, 0x97d2, 0x5c59, 0xe204, 0x39b8, 0x01a0, 0x8ced, 0xf4e4, 0x720f,
    0x02d5, 0x2aa8, 0x4663, 0xc21a, 0x6132, 0x703e, 0x091e, 0x51fd, 0x1186, 0xd85f, 0xecd4, 0x243d, 0xdcb0, 0xb1a8, 0x6a94, 0x2597,
    0x6876, 0xbb3e, 0x2e28, 0x987b, 0x6f19, 0xb228, 0xed96, 0xbd7a, 0x9b68, 0xc1c9, 0x5f6d, 0x542f, 0x3e75, 0xac12, 0xcbe4, 0x38bf,
    0x52de, 0x5abc, 0x067f, 0x7164, 0x7af2, 0x8b1e, 0x80cb, 0x633e, 0x2eb2, 0x31b4, 0x4672, 0xeb18, 0x255c, 0xd805, 0x97cb, 0x616e,
    0xef5e, 0x322b, 0xdba8, 0x4f58, 0xefbb, 0xfb65, 0xee53, 0x05bb, 0xb74d, 0x6996, 0xd8cf, 0xc467, 0x461b, 0x6605, 0xec95, 0x2033,
    0x397a, 0x0fb5, 0x6c2b, 0x48e7, 0x4ef7, 0x5c4c, 0xec8e, 0x1525, 0x1ba2, 0x1df8, 0x1120, 0x3143, 0xf2fd, 0x5b38, 0x88be, 0x7066,
    0x0530, 0x89b7, 0xc4dd, 0x865f, 0xea28, 0x408f, 0x202f, 0x305e, 0x49fa, 0x8ae1, 0x09b1, 0xdb62, 0x59c6, 0xaa27, 0xf24a, 0x12b9,
    0x0c55, 0x7b93, 0x4957, 0x562e, 0x147b, 0x5299, 0x4501, 0xb601, 0x8f9d, 0x0fcf, 0x8f6e, 0x45d0, 0x7997, 0xeb04, 0x49c7, 0x3ab0,
    0x3b11, 0x20d8, 0xbccd, 0x8fe1, 0xafcc, 0x4f90, 0x373e, 0x54bc, 0x4243, 0x5f81, 0xf58f, 0x2029, 0x5ec7, 0xfaca, 0xc738, 0x1e57,
    0x37d4, 0x87bc, 0xd2cd, 0xa10f, 0x5351, 0xd84e, 0x01e4, 0x79e3, 0xeea4, 0xee14, 0x4037, 0x402d, 0xdc61, 0x0c40, 0x7835, 0xe475,
    0xef1b, 0xf4c2, 0x5e30, 0x2f20, 0x8efb, 0xdb6c, 0x99ca, 0x77d8, 0x1581, 0xbe86, 0xec91, 0x053b, 0xbb18, 0x0cbb, 0x2d28, 0x1127,
    0x1fbf, 0xa7ab, 0xa283, 0x1e24, 0xa136, 0xd339, 0xe889, 0x14ab, 0x04eb, 0x9779, 0x576f, 0x40e3, 0xd02e, 0x9276, 0xbcfe, 0xab44,
    0x842b, 0x743e, 0x2362, 0x2dfc, 0x0ca7, 0x67ad, 0xd933, 0xcea0, 0x478b, 0x970b, 0x9766, 0xb840, 0x8d87, 0x3a82, 0x3dc9, 0x8913,
    0xb957, 0xe7db, 0x0d0f, 0x35e7, 0x3293, 0x6e90, 0x3b49, 0x1768, 0x0083, 0x1c7a, 0x6d22, 0xedb0, 0x1e2c, 0xea07, 0xdd23, 0xa860,
    0xc8da, 0x846b, 0x05d8, 0x5c25, 0xaf17, 0x270c, 0xc150, 0x47ba, 0xc71b, 0x99a6, 0x2812, 0x8e4c, 0x76dd, 0xe3b6, 0xa9b4, 0x5d45,
    0x45da, 0x0275, 0x7576, 0xba74, 0xfe9f, 0x8ed2, 0xfbb4, 0x33dc, 0x7abd, 0x96ed, 0x73a8, 0x3d06, 0xc341, 0x0be8, 0xadd6, 0x364d,
    0x19d1, 0x47e4, 0x674c, 0xce10, 0x9eac, 0xbc6d, 0xbee7, 0x29fc, 0x88fb, 0x0e49, 0xf410, 0x17c6, 0xa31d, 0x26f6, 0xfa07, 0xc7de,
    0xd5c6, 0x0941, 0x11a5, 0x0056, 0xd79a, 0x8d86, 0x2417, 0x6550, 0xb4be, 0x30f3, 0x24c8, 0xeae2, 0x1829, 0x4558, 0x0a7d, 0x006a,
    0x0416, 0x503d, 0x198c, 0x47f4, 0xb807, 0x711e, 0x3ed3, 0x3bdc, 0x7e1e, 0x31f8, 0x91ec, 0x3b05, 0x6718, 0x2b85, 0xc186, 0x8a65,
    0xbf1f, 0xaba7, 0x4617, 0xc6a1, 0x0174, 0xc271, 0xc50b, 0x22f9, 0x7e82, 0x89da, 0xfa01, 0x1cd0, 0x80bb, 0x197d, 0xc757, 0xaa01,
    0x8455, 0x9182, 0x3f7f, 0x92f3, 0xd57c, 0xf635, 0x5928, 0xaab1, 0xe89e, 0x5e3c, 0xb399, 0x001b, 0x50f6, 0xa719, 0x314d, 0x2cfd,
    0xec0e, 0x2b7a, 0x4350, 0x23b9, 0x5bf4, 0xb1d2, 0xc528, 0x93e8, 0xb6da, 0x4bb6, 0xc29f, 0x7bee, 0xe018, 0xfcf3, 0xadb3, 0x5831,
    0x9c1d, 0x5f34, 0xca3a, 0xa15b, 0x385f, 0x46d4, 0x873a, 0x63d0, 0x3a4d, 0xed12, 0xda45, 0x7502, 0x33fb, 0xf3b7, 0xf7a0, 0xb537,
    0x1228, 0x4c8e, 0xefe0, 0x6c54, 0xf9a5, 0x84c7, 0xe912, 0x302e, 0x9ac9, 0x3cbb, 0x5405, 0x3193, 0xac8d, 0xb846, 0xf3e7, 0x1807,
    0xc536, 0x9564, 0x5847, 0x3d7d, 0x3373, 0xd6c9, 0x11bb, 0xa56a, 0xdd6d, 0x2425, 0x3b57, 0xa72a, 0xec9c, 0xcac1, 0x1f62, 0x01f2,
    0x3884, 0x13cb, 0x6ff3, 0xc969, 0xdf06, 0x3fc7, 0x3d6f, 0x837e, 0x8ae4, 0x75ee, 0x16fa, 0xc471, 0x25c6, 0x092c, 0x96a6, 0x425d,
    0xa093, 0xdb97, 0x5acf, 0x4e19, 0xeb22, 0x1b43, 0xbb3c, 0xc99a, 0x1c72, 0x6945, 0x43bb, 0xf6f1, 0xce94, 0xd442, 0xf27a, 0x1e8b,
    0xd122, 0x0bac, 0x071e, 0xabba, 0xe4cb, 0xbf38, 0x6930, 0x8429, 0x2c9c, 0x8bb5, 0x3447, 0xebb9, 0x5ba1, 0x3aca, 0xe282, 0x87b9,
    0xdf3d, 0xe926, 0x475e, 0x8357, 0xa159, 0xcc97, 0x3931, 0xa6d1, 0x62ab, 0xf801, 0x156e, 0x00ca, 0xed23, 0xd79b, 0xdcbb, 0x93d4,
    0x3fa5, 0x2bb1, 0xe07b, 0xf2bb, 0xd046, 0xc899, 0x11ad, 0xbc5d, 0xf904, 0xfcca, 0x80da, 0xab83, 0x78af, 0x71e7, 0x118c, 0x668a,
    0x42e9, 0x9c68, 0x6d99, 0x67e5, 0xed63, 0xb795, 0xf447, 0x8c19, 0xd193, 0x27b5, 0xfd1d, 0x3a14, 0x74cc, 0xdbaf, 0x4af2, 0xb912,
    0x6deb, 0x5439, 0xc7ed, 0x5051, 0x7b14, 0x9952, 0xc6c8, 0x894a, 0x0475, 0x0f1b, 0xfb96, 0xb6a5, 0xda89, 0x827e, 0x6601, 0x7bac,
    0x4e16, 0xdac5, 0xc89b, 0x2105, 0x3b48, 0xbc5c, 0x5a49, 0xf144, 0xccb6, 0xf2b3, 0xf696, 0x8fbe, 0x2a75, 0x29c2, 0xb234, 0xcedd,
    0x09c1, 0x4991, 0xe54c, 0xec3b, 0x953f, 0xfb9c, 0xd6bb, 0xf482, 0x46c0, 0x342a, 0xa0e1, 0xf405, 0xe801, 0x266d, 0x5a98, 0x07c6,
    0x9367, 0x5f68, 0x6cd0, 0x69b3, 0x181c, 0xb223, 0x4f8d, 0x76c8, 0x194a, 0x7aed, 0xe511, 0x31ed, 0x9d5b, 0xeb13, 0xa438, 0x9600,
    0xae01, 0xec89, 0x0cf5, 0x5fcf, 0x3ce1, 0x1df3, 0x585b, 0xb1d5, 0x59a2, 0xb748, 0x9181, 0xef5d, 0xe740, 0x05b6, 0x8329, 0xb325,
    0x773b, 0xd2c8, 0xca66, 0x4aa7, 0x8717, 0x0c3b, 0x31a4, 0xcc11, 0x34fb, 0x5ec2, 0x5cac, 0xae92, 0x0784, 0x8fdc, 0x1df4, 0x0eca,
    0x178a, 0xf245, 0xea8f, 0xf048, 0x438b, 0x89b2, 0xd56e, 0x1834, 0xdb05, 0x0c50, 0xfe54, 0x73ee, 0x68c0, 0x3aab, 0xa592, 0x9005,
    0xb47c, 0x24c3, 0xe2bf, 0x8608, 0x3175, 0x8d81, 0xf039, 0xe52b, 0x7867, 0x9ea7, 0xe12d, 0xe4b1, 0x0654, 0x17c1, 0x97e5, 0x3557,
    0xd7cc, 0xc14b, 0x8919, 0x5951, 0x57c0, 0x99a1, 0x63db, 0x8c64, 0x2838, 0x7ab8, 0x5a6c, 0xf2ff, 0xe80d, 0x33d7, 0xd1f8, 0x5385,
    0x4e48, 0x5e2b, 0xc65e, 0xc0ca, 0xb1e6, 0x0cb6, 0x62f8, 0x0a3a, 0xd21d, 0xd029, 0xaf8e, 0x0354, 0xccc9, 0x1e1f, 0x4216, 0x2204,
    0xa08b, 0xdd1e, 0x8580, 0xd4f0, 0x2d2f, 0xe7d6, 0xaaa3, 0x43f3, 0x3b89, 0x8426, 0x82d0, 0xe170, 0x3d55, 0x890e, 0x1431, 0xba1f,
    0xebcd, 0xf691, 0xfc00, 0xb155, 0xb8f3, 0xbc57, 0x7e65, 0x7c82, 0x14e1, 0x953a, 0xf959, 0x665b, 0x9336, 0xf400, 0x1a15, 0x2360,
    0x1d41, 0xc6c3, 0xcb85, 0xa3c5, 0xf503, 0x0f16, 0x0e3d, 0x8041, 0x137b, 0xd18e, 0x8724, 0xc47d, 0x22ac, 0x8c14, 0x9879, 0x5a5f,
    0x2757, 0x0719, 0xeae3, 0xd501, 0x27ed, 0x3ac5, 0x3046, 0x299a, 0xf9c9, 0xce8f, 0x79d0, 0x1a74, 0x69b0, 0x4e14, 0xa61a, 0xc16d,
    0x78d7, 0xdcb6, 0x4c65, 0x04a1, 0xa766, 0xe921, 0x3f71, 0xd3eb, 0xf697, 0x3fa0, 0x21cd, 0x861e, 0x5f32, 0x6685, 0x28d8, 0xf2f0,
    0x01c6, 0xf9fc, 0x6200, 0xe30e, 0xcf56, 0xc26c, 0xf0e2, 0x6187, 0x2460, 0xb802, 0xfbc4, 0x6824, 0xbead, 0x3b00, 0xb9b3, 0xa4d9,
    0xa24d, 0x5923, 0xac75, 0x8d0b, 0x36d9, 0x5e37, 0xdc54, 0x1617, 0x5db2, 0xb6d5, 0x17ce, 0xb511, 0x6b2d, 0x93e3, 0x6bc5, 0x09c9,
    0x2eec, 0x5842, 0x1b9e, 0x9a2b, 0xaf38, 0xcabc, 0x0ce9, 0x23dc, 0xa3b2, 0x25c1, 0x819b, 0x277d, 0xd031, 0xc964, 0x8401, 0x4ea6,
    0xe400, 0xf3e2, 0x74e0, 0xe61d, 0x2a66, 0x4c89, 0x9174, 0xa3f2, 0x600c, 0x9c18, 0x6607, 0x81dc, 0x238c, 0xb532, 0xf20a, 0x13fa,
    0x0210, 0xe6cf, 0xb56f, 0x1f1c, 0x438a, 0x6009, 0xe009, 0xfab5, 0xe707, 0x644d, 0x111f, 0x7bed, 0x9d99, 0x72da, 0x130b, 0xdf94,
    0x0608, 0x0919, 0xde2a, 0x208b, 0xf6c7, 0xd85a, 0x8c3a, 0xc38a, 0xe823, 0x97cd, 0xa5c0, 0xe00b, 0xa35f, 0x1879, 0xce13, 0xdf31,
    0x59e9, 0x4b6b, 0x029d, 0x21dd, 0x7ab6, 0x1366, 0x28fa, 0x0d62, 0xee0d, 0x03cc, 0x848a, 0x15d9, 0xa0a3, 0x862f, 0x0f70, 0x3ce2,
    0x7be7, 0xe590, 0x232d, 0x2974, 0x6f13, 0x600a, 0xe890, 0x53d5, 0x4f0d, 0x5808, 0x1fd3, 0x1324, 0x3440, 0x2736, 0xe108, 0xee77,
    0x4f3f, 0xb9c8, 0x66d0, 0xa983, 0x6855, 0x3c19, 0x6b73, 0xd55e, 0x47ce, 0x1e5d, 0xcb47, 0x324c, 0x814c, 0x664c, 0x0b26, 0x4b97,
    0xc5a6, 0xff2f, 0xa5b3, 0x8210, 0x7ed1, 0x6a4e, 0xf674, 0xca24, 0x0513, 0xdeb4, 0x1331, 0xf49f, 0x50ad, 0x626e, 0x54eb, 0xded3,
    0x9f1c, 0x596b, 0x9cbc, 0x95bc, 0x9a5d, 0x02e1, 0x5641, 0x883b, 0x3078, 0xe862, 0xb681, 0x1b3b, 0xdbdc, 0x6a36, 0xc315, 0xf493,
    0x07b6, 0x3570, 0x25b9, 0x0987, 0x30ce, 0x0a57, 0x000d, 0x6c67, 0xeec3, 0x4157, 0x111c, 0x2af5, 0xd05b, 0x811a, 0x6f9f, 0x5ee5,
    0x1c21, 0xfdce, 0x54b2, 0xb200, 0x9c91, 0xc63a, 0xb9f1, 0xa5e2, 0x5964, 0x5533, 0x37ee, 0xfef9, 0xe644, 0x767a, 0xf2da, 0xb194,
    0x4aa0, 0xa349, 0x6c21, 0xb98c, 0x0ab0, 0xe97c, 0x359a, 0x5776, 0xa55e, 0x8223, 0x1c2e, 0x105a, 0xfbf9, 0x979c, 0xcfae, 0x1d9a,
    0xe7f4, 0x93b3, 0xe3ac, 0x24c9, 0x3491, 0x6576, 0xc122, 0x55ba, 0xabcb, 0xcba4, 0x372b, 0xfc6b, 0x5f95, 0x92c6, 0xae5b, 0xbcfb,
    0xdd62, 0xd44d, 0x04e1, 0x491a, 0x9a1c, 0xd3f6, 0x313f, 0xa300, 0x38c1, 0x8fbf, 0xc38c, 0x88a6, 0xc5d3, 0x930b, 0x7cbe, 0xd3ab,
    0x9c98, 0xd368, 0x23af, 0xc1ab, 0x88d6, 0xde2e, 0xf03d, 0xf95d, 0xad24, 0x78a2, 0xe44d, 0x9082, 0xeb5d, 0x7a41, 0x72a6, 0xf61d,
    0xec99, 0x6750, 0x11b1, 0x16fe, 0x9da4, 0x0bb4, 0x8687, 0x9af3, 0xdf73, 0x14fe, 0x33a6, 0x6708, 0x920b, 0x32a8, 0x88d2, 0x002b,
    0x72bb, 0xc75d, 0x8bab, 0x2093, 0x7482, 0xda48, 0x1952, 0x6d63, 0xfbed, 0x3399, 0x09da, 0xfe1d, 0xc25c, 0x9f61, 0x3846, 0xb3fa,
    0xadfb, 0x8d0e, 0x74c2, 0x9fbe, 0xa9fb, 0xa416, 0xa70b, 0x7e9f, 0x4467, 0x911f, 0x41c9, 0xaeb1, 0x9e56, 0xf834, 0x2a27, 0xf996,
    0xedcb, 0xd049, 0x8da1, 0x7591, 0x05d6, 0x6891, 0x5f9c, 0xf265, 0x4e34, 0xa174, 0xdbca, 0xf6b1, 0xaa1c, 0xb6f5, 0x4ca9, 0x3d8a,
    0x7a61, 0xf78d, 0x6db6, 0xc77d, 0xd3d5, 0x8fdf, 0xe99c, 0x509b, 0xc235, 0x646d, 0x1386, 0xd78b, 0x813a, 0x22ed, 0x4769, 0xff4f,
    0x219c, 0x98ce, 0xd364, 0x6add, 0x0b72, 0x2ae0, 0xa091, 0xef13, 0x2389, 0xd264, 0x38e8, 0xf118, 0xb1d6, 0x342e, 0x3a86, 0x20dc,
    0x9d87, 0x15ea, 0xd89f, 0xbca9, 0x9f3e, 0xc234, 0xe00a, 0x9180, 0xc270, 0x7af1, 0x6272, 0xa34d, 0x8936, 0x648d, 0xc254, 0x0e6d,
    0x7a70, 0xa32d, 0xcc79, 0x2e41, 0xeb4b, 0x330f, 0x43b3, 0xd9f5, 0xac33, 0xe258, 0x88ba, 0xe295, 0x8dc4, 0x60b8, 0x8697, 0x91f9,
    0xa974, 0x0d16, 0xc24a, 0x3718, 0x4dcf, 0x695a, 0x64f1, 0x1308, 0x6f47, 0x9e44, 0xbd11, 0x51ee, 0xc2f9, 0x36a2, 0xc674, 0x0ce1,
    0x77b9, 0xa927, 0xdfb8, 0xfbe7, 0x2d03, 0x90c5, 0x1d25, 0x29f6, 0xe632, 0xb085, 0x2881, 0xcc83, 0x0e88, 0xc250, 0xeb93, 0x650c,
    0xfe38, 0xeb78, 0x6591, 0x54cd, 0x6c82, 0xc5c1, 0x5823, 0xce2e, 0x8d26, 0x2a81, 0x8c2f, 0x21e8, 0x3572, 0xd238, 0x5f83, 0x31bf,
    0x9d49, 0x405a, 0x576c, 0x453f, 0xb06a, 0xd87f, 0x7062, 0x8031, 0x6d01, 0x06a6, 0x7032, 0xe72e, 0xbbb0, 0x6109, 0xe6d5, 0x2bbe,
    0x66a2, 0xb3c6, 0x23a5, 0x4a51, 0x659b, 0xcf78, 0x0772, 0x981d, 0xe779, 0xb4ed, 0x6ddf, 0x0afb, 0x6e78, 0x68ae, 0x075f, 0x56e0,
    0x30f4, 0x0e69, 0x272c, 0xe617, 0x9296, 0xcfc1, 0xb8df, 0xe7fb, 0x6625, 0x15ca, 0x5286, 0xbb5e, 0x0642, 0x0fef, 0xd86e, 0xb440,
    0xf3d7, 0x3d43, 0x306e, 0x9584, 0x988c, 0x4bd6, 0xc291, 0x3c74, 0xf1a6, 0x6965, 0xccb7, 0x5139, 0x268d, 0x812a, 0xa736, 0x5459,
    0x3622, 0xdfc2, 0xe304, 0x3efe, 0x2e7c, 0x5f20, 0x1563, 0x6af9, 0x4ece, 0x9fd3, 0xcc68, 0x4358, 0x49cd, 0xda2f, 0x699e, 0x0482,
    0x7d8e, 0xfcad, 0x0e33, 0x229a, 0xab1f, 0x7f02, 0xc035, 0x913d, 0x9324, 0x8eb3, 0x0830, 0xc7a1, 0x66e4, 0x9f1e, 0xb348, 0xeea6,
    0x40fd, 0xc583, 0xd01f, 0x4bfb, 0x571f, 0xa80e, 0x70c2, 0xf17a, 0xdca3, 0x237a, 0x15cd, 0xcf0d, 0x2402, 0x2866, 0x9c94, 0xe9ac,
    0xdd2a, 0x9160, 0x68b6, 0xc04d, 0xbe9b, 0xdb29, 0x4ba8, 0xd4d2, 0x1a7c, 0x2b4f, 0xd808, 0x8546, 0x64d3, 0xdd6a, 0xca90, 0x6b1b,
    0xf78a, 0x771e, 0x58c7, 0x3392, 0x8d62, 0x0823, 0xd747, 0x2ce8, 0xbcd0, 0xa1ed, 0x2d5c, 0x1d36, 0xf65a, 0x217c, 0xd814, 0x47c7,
    0x59b7, 0x17f4, 0x4f39, 0x976d, 0x833d, 0xa8fa, 0x12b3, 0xe50a, 0xc038, 0x9f3f, 0x1393, 0x1a6d, 0xaeb4, 0xbf5d, 0x5b34, 0x26e0,
    0x90aa, 0x6abd, 0x2447, 0x5f1a, 0x8da0, 0x3391, 0x9366, 0xe6ce, 0xcbe3, 0x8a64, 0xc062, 0x20d5, 0x7153, 0x585c, 0x40b4, 0x6ed8,
    0x4f9c, 0x2498, 0xb5da, 0x8a23, 0xd64b, 0x8c98, 0xec00, 0xfab6, 0xb263, 0x6489, 0x8e5d, 0x9a02, 0xdb64, 0x78dd, 0x8212, 0x8dab,
    0xa1dd, 0xfb78, 0x793d, 0x8f45, 0x9a23, 0xf5dc, 0x7141, 0xc3dc, 0xfe8e, 0x1d0a, 0x2579, 0x5c89, 0x7dcb, 0xdb52, 0xb300, 0x3dd6,
    0xf648, 0x829d, 0x1694, 0x8893, 0xabb7, 0xa071, 0x5e7f, 0x55a2, 0x1409, 0x4726, 0x54da, 0xaea2, 0x39d4, 0x1e83, 0x56eb, 0x9b26,
    0x615a, 0x7da7, 0xcb6b, 0xc652, 0xe661, 0x7d69, 0x9ebb, 0x7344, 0x5dd9, 0xd668, 0x6dc0, 0x9cf0, 0x6dd2, 0x8a2a, 0x29db, 0x9bbe,
    0x4b4d, 0xc420, 0x9913, 0xd9e9, 0xace9, 0x949c, 0x23ab, 0x39c2, 0xa5f3, 0x2ac0, 0x54a2, 0x8d44, 0x7db9, 0x3a09, 0x5ef1, 0xcee3,
    0x53f4, 0x76c5, 0x23f0, 0xe3d8, 0xa495, 0x144f, 0xd4ca, 0x8e30, 0x72e9, 0x64c1, 0xcd37, 0x3a2c, 0xbce2, 0x2af3, 0xfa52, 0x8b2b,
    0x9451, 0x20bc, 0xa23c, 0x3da6, 0x49bb, 0xd36e, 0x4fe8, 0xc82b, 0xba7f, 0xbe72, 0x4edb, 0x779e, 0x33a4, 0x8f70, 0x801e, 0x66d2,
    0xfd01, 0xb4bf, 0xb97d, 0x093a, 0xd419, 0x267b, 0x71f5, 0x80ea, 0xebdd, 0x4566, 0xea15, 0x879d, 0x5b46, 0xe0f4, 0x0630, 0x0c4e,
    0x18f1, 0xe838, 0xd93a, 0x6e66, 0xe9e2, 0x85c9, 0xc51a, 0x4610, 0xbb9e, 0x4473, 0xc1a7, 0xf2b4, 0xa90c, 0xb1b6, 0x1379, 0x20a4,
    0xd8a9, 0x6c5c, 0x174f, 0x4c2e, 0x4a02, 0x6532, 0x05f2, 0xc2e7, 0x95d9, 0xd244, 0xf931, 0x701a, 0x8db2, 0xc9d3, 0xeace, 0xdc6e,
    0xb32e, 0x3560, 0xf2f9, 0x4eaf, 0xdedc, 0xdf9d, 0xf99f, 0xbd04, 0x56e9, 0x048b, 0x0e76, 0x6515, 0x6eea, 0x8b34, 0xceec, 0x6ee1,
    0xaa0a, 0xb540, 0x6693, 0xcee6, 0x3ab9, 0x38c8, 0x0073, 0x891c, 0x2744, 0xefac, 0x83cc, 0x8128, 0xb5ec, 0xf842, 0x9319, 0x5320,
    0x78eb, 0x38fe, 0xfbcc, 0x3a17, 0x9d3d, 0x8932, 0xb1c4, 0x6758, 0x64db, 0xdd78, 0x8138, 0x6e0e, 0x649b, 0x8924, 0xa413, 0xd246,
    0xdfcd, 0x111a, 0x1634, 0x45a7, 0x2448, 0x6004, 0x50e4, 0xec50, 0x10a8, 0xf6c2, 0x5fb6, 0xbefb, 0xb48e, 0xe006, 0x8ce6, 0x6529,
    0x6706, 0xe88b, 0x7f30, 0xf2dc, 0x9e29, 0x5803, 0xda95, 0x9804, 0x0a9b, 0xee08, 0x8970, 0x80a9, 0xe4c3, 0x0d5d, 0xbcaa, 0xe8ec,
    0xaade, 0x25b4, 0xb81a, 0xdb03, 0x86be, 0x8115, 0xc460, 0x7e0a, 0x8f51, 0xdbd7, 0xec8a, 0x4542, 0x63ed, 0x95b7, 0xb094, 0xae5e,
    0x0211, 0x0b21, 0xd18c, 0x6f2c, 0xf3d1, 0xb9c3, 0x0166, 0xac7b, 0xd944, 0xc5a1, 0x954f, 0x1528, 0x33e9, 0xdece, 0x241e, 0x83a2,
    0x9bc5, 0x41c4, 0x789e, 0x5b8f, 0x3aec, 0xa411, 0x66b1, 0xfed1, 0xce82, 0x747d, 0xe19e, 0xa7dd, 0xccdb, 0xfe18, 0x52ba, 0x2bfa,
    0xd55d, 0xf038, 0xf5db, 0xeb4a, 0x9b24, 0x789d, 0xea4e, 0xe14e, 0xf0ee, 0xdf6e, 0x51d3, 0x9dbc, 0x0a4c, 0x9aee, 0xed11, 0x49f9,
    0x6237, 0x54ad, 0xc6e7, 0x8a97, 0x74ba, 0x7675, 0xa0d1, 0x268b, 0x5d38, 0xfbf4, 0x228b, 0xf196, 0x82e2, 0xb987, 0x15a6, 0xda77,
    0x16e6, 0x7cb9, 0x2a63, 0x0825, 0x4a25, 0xd448, 0x22eb, 0x431b, 0x725e, 0xe7ef, 0x09eb, 0x1b75, 0xdd30, 0xbcf6, 0xa699, 0x1bc7,
    0x62c8, 0x8196, 0x039b, 0x6084, 0xe367, 0xcab7, 0x296d, 0x7985, 0x3687, 0x2a61, 0x6c1a, 0x8513, 0x59b4, 0x81d7, 0xad20, 0x2953,
    0xfaf4, 0xdc4f, 0xa246, 0x512a, 0xd824, 0xb6d0, 0xcb7a, 0x9654, 0x38b0, 0x245b, 0x5eb5, 0x5548, 0x5fe1, 0x6182, 0xdd17, 0x24cf,
    0x3e63, 0xcb80, 0x4dc8, 0x9d66, 0x30b5, 0x8c0f, 0x006b, 0xc533, 0x0554, 0x9331, 0x48d4, 0x254a, 0xa44a, 0xb150, 0xdb22, 0xc2de,
    0x77da, 0xa615, 0x1d9c, 0x345f, 0x4d9f, 0x0714, 0x4609, 0x55f2, 0x74a0, 0x78d2, 0x12ac, 0x753e, 0xb235, 0xf2eb, 0x61db, 0x44da,
    0xe285, 0x917c, 0xa30b, 0xe350, 0x9f69, 0x1dee, 0x0cc6, 0x23fa, 0x7489, 0x1817, 0x77f0, 0x362a, 0x439d, 0x31e8, 0x651d, 0xd0ad,
    0xc065, 0x319f, 0x833f, 0x38b2, 0x76cb, 0x5ebd, 0x1714, 0xcc3d, 0xa280, 0xdb00, 0xa4ab, 0x2b17, 0x9017, 0x182f, 0xe26e, 0xc32f,
    0x27aa, 0xc659, 0xfd36, 0xa2c0, 0xce6b, 0x1e1a, 0x1521, 0x8a8c, 0x1604, 0x3d50, 0x5eae, 0x94b0, 0xca78, 0xd4eb, 0x8d75, 0x4a0e,
    0xc3b9, 0xd1f3, 0x01fa, 0xd01c, 0x8797, 0xc146, 0xab99, 0x5359, 0xbb06, 0xb477, 0x01b6, 0x0145, 0x5ed4, 0x3552, 0x77ad, 0x05e9,
    0xaccf, 0xcc63, 0x39c9, 0xf531, 0x3674, 0x5f1b, 0xde55, 0x0ba4, 0x9285, 0xab1a, 0x2dcb, 0xa959, 0xe412, 0xc79c, 0xebb6, 0xb71d,
    0x4ad1, 0x4ba3, 0x018e, 0xcf3f, 0x90e3, 0x2b4a, 0xe449, 0xf476, 0x5ff5, 0xdc9e, 0xe7a2, 0x022a, 0x81ee, 0xf175, 0xb52a, 0xd8a0,
    0x2984, 0x3069, 0xa074, 0xd278, 0xc4b8, 0x8125, 0x3b8c, 0x0188, 0xa873, 0x063d, 0xb720, 0xae02, 0x0cfb, 0xe612, 0xf345, 0xc1d9,
    0x254c, 0xe6d0, 0xdac8, 0x6b84, 0x1933, 0x4055, 0x7e74, 0x4fce, 0xc84d, 0x669d, 0x42d4, 0x94ce, 0xc976, 0x56db, 0x03bf, 0x4374,
    0xe80c, 0x626d, 0xc673, 0x9b25, 0xf0ed, 0xc22f, 0xbc19, 0xbc0d, 0x4d82, 0x0b6d, 0x760c, 0x7a9f, 0x6b3f, 0xf113, 0x4956, 0x6c53,
    0xad91, 0x5f97, 0x0ad2, 0x3295, 0x1c47, 0xa16f, 0x9f05, 0xe855, 0xfb0b, 0xc230, 0x646a, 0x62a0, 0x1629, 0x5096, 0xba2e, 0x52a5,
    0xafdb, 0xcc74, 0x36fd, 0xc0a2, 0x555f, 0x60b3, 0x40db, 0x9d8d, 0x1bef, 0xc2f4, 0x363e, 0x9ed9, 0xfbd6, 0x3713, 0xf3bd, 0xc872,
    0xa27d, 0x5f7e, 0x6f57, 0xe340, 0x9796, 0xeb73, 0x1cc2, 0x8a58, 0x06bb, 0x77b4, 0x4a89, 0xc8c6, 0xfa0e, 0x6507, 0x5c48, 0x7e97,
    0x8cbe, 0xc05d, 0x44ed, 0x3f41, 0x95c2, 0x338c, 0x18fc, 0x3f0f, 0x5c23, 0xd646, 0x9e5d, 0xcd64, 0xf9db, 0x99fd, 0x7689, 0x9d26,
    0xec02, 0x12ae, 0x18da, 0x1759, 0x5609, 0x9f3a, 0xe0e4, 0x4db4, 0x7582, 0xbccb, 0x87e7, 0xc7ce, 0xd513, 0x2ce3, 0xc570, 0x24fd,
    0x172e, 0x168f, 0xf760, 0x8d4b, 0xf831, 0x1e7e, 0x60c4, 0x0a7e, 0xb24c, 0x7dc6, 0xdb95, 0xee3a, 0x28ea, 0x8f40, 0xd99e, 0x3e36,
    0x693f, 0x29d6, 0x4ef3, 0x515c, 0x7e5f, 0x7da2, 0xc749, 0xb03a, 0xc93c, 0x4b48, 0xea54, 0x8453, 0xe933, 0xcede, 0xa1c6, 0x1746,
    0xc051, 0x0e71, 0x9cf4, 0x80ee, 0xc1af, 0xdf98, 0xf303, 0x8045, 0x512e, 0x49fd, 0xa95d, 0x8049, 0xb905, 0x7015, 0xe64c, 0xfb7e,
    0x48eb, 0x006e, 0x00ce, 0xa56e, 0x309d, 0xefa7, 0xad30, 0xd3be, 0x0201, 0x64d6, 0x907e, 0x95fd, 0x2372, 0x6753, 0x2ec7, 0x014d,
    0x9076, 0xb978, 0xa52c, 0x9cd1, 0x546c, 0xe0ef, 0x30dd, 0xf6bc, 0xf0cf, 0xa907, 0xc0e8, 0x830f, 0xcb97, 0x6e61, 0xd0e6, 0x4c25,
    0x930d, 0x8019, 0x67af, 0x17ac, 0x02ae, 0x20b7, 0x196f, 0x28b2, 0xc18e, 0x53ef, 0x7ce8, 0x5708, 0xd1a0, 0x8b26, 0x12ed, 0x4d3a,
    0x8e0c, 0xa5b9, 0x7f2e, 0xd5a3, 0x752b, 0x7006, 0x90ab, 0xf88d, 0x531d, 0xccf8, 0x9a99, 0x0bf7, 0x59fb, 0x889f, 0xb7df, 0x51c6,
    0x8987, 0x91d9, 0x612c, 0x345d, 0xd2e0, 0x9c11, 0x8540, 0xb617, 0xdc3f, 0x2831, 0xf352, 0x2819, 0x15eb, 0xd148, 0xa4b2, 0xd65b,
    0xad8f, 0x4715, 0xf342, 0x87b6, 0x7c55, 0xd231, 0x72a2, 0x6f99, 0x5fd0, 0x66dd, 0xe27a, 0x163f, 0xe8a2, 0x3b4c, 0xb95b, 0xdc65,
    0x9047, 0x8017, 0xb570, 0x74d8, 0x5c27, 0xf0f1, 0x670a, 0x901b, 0x5db6, 0x3ce5, 0x4f43, 0xe648, 0x2748, 0x8da4, 0xfe3c, 0x2691,
    0xe14f, 0x3df7, 0xd6d9, 0xac18, 0xd9cc, 0x800d, 0x98a6, 0x967e, 0x0b7d, 0xe238, 0x4b53, 0xa12e, 0x9dab, 0x5395, 0x0fb1, 0x00f9,
    0x0890, 0x98a1, 0x445f, 0x3833, 0xec67, 0xe233, 0xf64a, 0x9019, 0xa01b, 0xa016, 0xbc1a, 0xf23a, 0xfac7, 0x9014, 0x639c, 0x8f2b,
    0xfb32, 0x7f29, 0xef81, 0xefca, 0xe23d, 0x889a, 0x8963, 0xb0ce, 0xb4a5, 0x15e6, 0xc903, 0x539a, 0xa5d2, 0x3458, 0xffa6, 0x58d1,
    0xc41f, 0xfe37, 0x0986, 0x857f, 0x8013, 0x8012, 0x8a57, 0x22ea, 0x07e0, 0xad8a, 0x3dfc, 0x2c44, 0x092b, 0xdc60, 0x7e40, 0xeac5,
    0x1d64, 0x9631, 0x3976, 0x680a, 0xef96, 0x700b, 0xf00d, 0x191b, 0x7c69, 0x911c, 0xa5be, 0xf864, 0xeed5, 0x7a50, 0x424e, 0xc9ca,
    0xb5e4, 0x867c, 0xc98e, 0x9225, 0xccfd, 0x7578, 0x98a8, 0xe44f, 0xaaf5, 0x42aa, 0xd1ad, 0x88a4, 0x0999, 0xb418, 0x0e20, 0xd75f,
    0x1a3c, 0x2e21, 0xe4f2, 0x9428, 0x4559, 0x9d83, 0x0302, 0xd14d, 0x2836, 0x4aad, 0x5aa9, 0x6ec4, 0xc327, 0x2df5, 0x41ef, 0x6f6a,
    0x7189, 0x4b02, 0x9d0d, 0xc6d7, 0x5ea8, 0xdabe, 0x91de, 0x03e5, 0x9043, 0x9c16, 0xc157, 0xa53c, 0x02f3, 0xf923, 0x2a76, 0x171b,
    0x90ec, 0xf0f6, 0x7e68, 0x5475, 0x9b2d, 0x2451, 0x87a0, 0x30be, 0x775a, 0x9926, 0xdee8, 0xffae, 0x7ee3, 0xef9f, 0x801c, 0x7c5e,
    0x3cea, 0x317e, 0xa76f, 0xaf41, 0x7eda, 0x4393, 0xaa04, 0x349a, 0x65a4, 0x2e85, 0x9f47, 0x2d0c, 0xdee5, 0xa49e, 0xacf2, 0x8da9,
    0x017d, 0x3868, 0xd04f, 0x3b51, 0x1484, 0x6f22, 0xd7a3, 0x0cb0, 0x4c76, 0x912c, 0xf619, 0x25cc, 0x66e2, 0xdf7a, 0xf730, 0x505c,
    0xe9f7, 0x70ba, 0x471a, 0xae46, 0x750e, 0xa0c7, 0x31ea, 0xfb7a, 0x609d, 0x32ef, 0x8593, 0xb176, 0x1e6f, 0xd236, 0x011b, 0xa8d0,
    0x15bd, 0x7607, 0x58e9, 0x2dfa, 0x48c1, 0xc22a, 0xfb1a, 0x6abe, 0x89e5, 0x1c42, 0x9fe3, 0x6f83, 0x4ab2, 0x629b, 0xeb64, 0x99b9,
    0x87da, 0x1cbd, 0x2e26, 0xa77b, 0x9915, 0x77af, 0xfdb2, 0xf7dd, 0x43de, 0x1bea, 0x6c27, 0xa9a8, 0x106c, 0x9d88, 0x27c8, 0x57e6,
    0xb56c, 0xdac3, 0xd96b, 0x85f0, 0xc539, 0x56d6, 0x4195, 0x5c90, 0xa3ea, 0x0cf6, 0xa2f5, 0x6e3e, 0xba03, 0xd273, 0x4b07, 0x603f,
    0x9c1b, 0xebb1, 0x6053, 0x1f1d, 0xdedf, 0xcc5e, 0x0408, 0x5993, 0x942b, 0x4acc, 0x5e1b, 0x7947, 0x768c, 0xd89b, 0x10cc, 0xf928,
    0x7289, 0xea4f, 0xaf68, 0x5512, 0x083c, 0x7d9d, 0xbd2e, 0xb41d, 0x42af, 0xf82c, 0xf557, 0x1bbb, 0xc5e5, 0xee35, 0x8a48, 0x1add,
    0xa7a3, 0x18f7, 0x96e7, 0xf983, 0x6319, 0xd641, 0x8681, 0x04fb, 0xe3bc, 0x757d, 0xa2cd, 0xbc0e, 0xa312, 0x4daf, 0x394b, 0xe3fd,
    0x2880, 0x9cef, 0xd21c, 0xe861, 0xffa5, 0x7010, 0x82e1, 0x3712, 0xe6f1, 0x236d, 0x9636, 0x89a6, 0x373d, 0xa569, 0x169e, 0x7011,
    0xb7ce, 0x12e8, 0x7a3d, 0xcb00, 0x9121, 0x8014, 0x47e6, 0x1a5e, 0x7275, 0x9071, 0x409b, 0x7a55, 0x93c5, 0x4c20, 0x7653, 0x5750,
    0x2e9b, 0x48cf, 0x084a, 0x36ae, 0x992b, 0x8c0a, 0xc3e3, 0x9939, 0x9b3b, 0x4d9a, 0x3370, 0xefa4, 0xad36, 0x7539, 0xd9da, 0xa9c9,
    0x9f77, 0xcb75, 0x6d93, 0xe375, 0x7751, 0x2456, 0x3afa, 0x4a6d, 0xce44, 0x3682, 0xf0fb, 0xb2bc, 0xc1bd, 0x7980, 0x3eeb, 0x95d0,
    0xcf64, 0x833a, 0xa670, 0xb901, 0x48f7, 0x182a, 0x3183, 0xfe88, 0x114b, 0x4398, 0x6863, 0x645d, 0x88e4, 0xe34b, 0xe8fc, 0x9c9f,
    0x1b59, 0x8d70, 0x9a31, 0x8de5, 0x4a10, 0xc654, 0x3ec5, 0xa4a3, 0x2e8a, 0xc3b4, 0x1fa8, 0xb078, 0x0bc6, 0x05e4, 0xeb59, 0x29c3,
    0x32f4, 0x51ce, 0xe795, 0x9fe6, 0x991d, 0x7898, 0xc6fc, 0x7e0d, 0x7097, 0x3ae7, 0x4435, 0xc5a9, 0x7494, 0xa7d8, 0xa07c, 0xd23b,
    0xa5fb, 0xa0cc, 0xd257, 0xed4c, 0xe23f, 0xfbef, 0x48e3, 0xd5c8, 0x46a9, 0x7259, 0x0b2e, 0x7961, 0xb40c, 0x4316, 0x70bf, 0x99a9,
    0xd7c1, 0xb815, 0x386d, 0xeff1, 0xed71, 0x95b2, 0xecdc, 0xeb30, 0xaf25, 0x33e4, 0x4bf3, 0x8f09, 0x74d4, 0x6f27, 0xea36, 0xd613,
    0x78b5, 0xbca5, 0x11ff, 0xdf7f, 0x7e07, 0xe886, 0x7110, 0xf166, 0xaddd, 0xdfc8, 0x1ff6, 0x1aac, 0x9131, 0x6524, 0xad6e, 0x5bdd,
    0x2fe2, 0xc380, 0x021d, 0x3bff, 0x6ffd, 0xa221, 0xcff8, 0x988a, 0x0f10, 0x5de0, 0xf885, 0x6206, 0x3441, 0xdd8f, 0x2ff4, 0x081a,
    0x2aaa, 0x66c6, 0x237c, 0x60b5, 0xfc49, 0x8874, 0x8fdd, 0x4134, 0x5d71, 0x6665, 0x9bfa, 0x3f8b, 0x60dd, 0x586f, 0x6218, 0x35cf,
    0xb401, 0x9301, 0x3d8b, 0xfc2a, 0x2113, 0xb1c2, 0x943c, 0x8365, 0xce1e, 0x379d, 0x6815, 0x2e0a, 0xefc6, 0x4f66, 0x8fef, 0x8f95,
    0xe563, 0xfbe3, 0xbddb, 0x5cce, 0x55a0, 0x28b8, 0x6f0b, 0x225f, 0x5b35, 0x59b1, 0xc201, 0x690f, 0x262d, 0x2e6e, 0x5881, 0x8642,
    0x4103, 0x85fe, 0xe86f, 0x1788, 0xefff, 0xc7fe, 0x5c45, 0xb90f, 0x3b5f, 0x3ad0, 0xa12f, 0x9436, 0xc487, 0x87c4, 0xefd8, 0xbd9a,
    0xa2ce, 0x5851, 0xc6c1, 0x9d74, 0x7522, 0xdb11, 0x8aa5, 0xa58a, 0xf425, 0xd286, 0xc0b0, 0x896a, 0x9cdf, 0x1eab, 0x8377, 0x8d59,
    0x9a39, 0x25b7, 0xb86a, 0xd50f, 0x06bc, 0x4ab5, 0xc0d8, 0x0043, 0x6bdb, 0x21eb, 0x95ca, 0x6293, 0x20a1, 0xf677, 0xc213, 0x24d7,
    0x16fc, 0x5f28, 0xc660, 0xea38, 0xcef4, 0x5337, 0xbd6c, 0x0948, 0x4c09, 0x5d48, 0x9f86, 0xe625, 0x6faf, 0x6aeb, 0xfbf5, 0x1dc5,
    0xc7ee, 0x209a, 0x11be, 0xb05a, 0x67fc, 0x4c45, 0x810e, 0x9dff, 0xc552, 0x52c5, 0xe360, 0x4eba, 0xae22, 0xdc87, 0xf437, 0x0bc4,
    0x507f, 0x83c2, 0xf2fc, 0xfcf2, 0xa7fd, 0x38e0, 0x13fd, 0x26ab, 0x0165, 0x4fcd, 0x5c26, 0xcc5d, 0xea8e, 0x2973, 0x9d86, 0x2497,
    0xaff5, 0xa8f0, 0xaf61, 0x4920, 0xf884, 0x0df1, 0x4fc2, 0xd16d, 0xe668, 0xdc96, 0xef90, 0xb637, 0x76ff, 0x0119, 0xefea, 0x2cdf,
    0xbc2e, 0xa1d3, 0x9798, 0x1a7e, 0x02d6, 0x605f, 0x2e1a, 0x1297, 0xd1aa, 0x95f0, 0x8e05, 0x4859, 0x8f29, 0xe2f6, 0xc810, 0x7e2d,
    0x6618, 0xcf03, 0x88b3, 0x817f, 0x1d56, 0x55fe, 0xb59b, 0xe6ee, 0xf2d4, 0xdf5b, 0x825a, 0xc84b, 0xf4bc, 0xdc8e, 0xcf06, 0x264a,
    0xc7c1, 0xa72c, 0x5bdf, 0xd4f2, 0xf8e5, 0xb460, 0x455f, 0x49a0, 0x115b, 0xff6f, 0xbcc9, 0x9242, 0xcca3, 0xa746, 0x1dd7, 0xda15,
    0xef7d, 0xa323, 0x8e69, 0x1854, 0xfe01, 0x2224, 0x8628, 0x640f, 0x20c2, 0x09e9, 0xe63d, 0x7327, 0x1a94, 0xcba1, 0xb87c, 0x7ca2,
    0xd353, 0xd3cb, 0xb9ac, 0xb0f4, 0x90a2, 0xf5b3, 0xbb30, 0x6d83, 0x2b15, 0xf6ab, 0xc90a, 0xca44, 0x9969, 0xdfb4, 0x21fd, 0xd73e,
    0xffef, 0xfec7, 0x27fa, 0x4d56, 0x910e, 0x3f89, 0x4ffb, 0x71c0, 0xeeed, 0xedee, 0x190b, 0x0df2, 0x96b7, 0x2737, 0xbc40, 0x437f,
    0x6cd6, 0x7f26, 0xe5f9, 0xf9e5, 0x8e03, 0x7fda, 0xa0fe, 0x0785, 0xb51b, 0x7e47, 0x7783, 0x598d, 0xd459, 0x2b0a, 0x486b, 0xf781,
    0xbb53, 0xd4e1, 0xe7bf, 0x4caa, 0x35ad, 0x4f7a, 0x2483, 0x9466, 0x0c22, 0x9e90, 0x1d96, 0x983c, 0xbad7, 0xe588, 0x4fd4, 0xa68d,
    0xb47e, 0x7496, 0x9acb, 0x0f4b, 0xeafc, 0x0e50, 0x9b5a, 0x24f9, 0xafab, 0x26e1, 0xf431, 0x2754, 0xc813, 0x4ec0, 0x012b, 0xf22e,
    0x1862, 0xcf35, 0x3b0d, 0x492e, 0xa5b0, 0xfc38, 0xd51d, 0x52e6, 0xbb98, 0x4cb8, 0x0586, 0x4b54, 0x73e6, 0x682e, 0xeaa0, 0x7715,
    0x435a, 0xbc0f, 0xb84c, 0x98bb, 0xbe57, 0x3026, 0x02ca, 0x9f9a, 0xd139, 0x9468, 0xfd6f, 0x21a2, 0xc08d, 0xde9d, 0x26bd, 0xb133,
    0xe0f7, 0x4b3e, 0x7ea6, 0x0578, 0xebd0, 0x77b5, 0xfcda, 0x6739, 0x28b5, 0xb165, 0xed54, 0x71a7, 0x9f4a, 0xc2c6, 0xe372, 0x7762,
    0x89dd, 0xcb8d, 0x3282, 0xba64, 0x553b, 0x69dc, 0x5421, 0x2f49, 0xfb2e, 0x3aa5, 0xe965, 0x929e, 0xfc83, 0x434a, 0x20ac, 0x5d39,
    0x98ff, 0x5052, 0xaab0, 0xee52, 0xc9bc, 0x4292, 0x66b7, 0xbfd8, 0xe611, 0x63ec, 0x603e, 0xb95a, 0x03cb, 0x34fa, 0x20d4, 0x38e7,
    0x4318, 0xc14d, 0x85b2, 0xed14, 0xbc74, 0x4627, 0xfa34, 0xcb03, 0xc029, 0x64aa, 0x350b, 0x05d9, 0x115f, 0xfc4d, 0x1866, 0x03cf,
    0x21b5, 0x8003, 0x5673, 0x7707, 0x1b1a, 0xffc7, 0x809c, 0x188d, 0x78c6, 0xa923, 0x84d2, 0x9590, 0x120a, 0x7f67, 0x220f, 0x1996,
    0x10fd, 0x897d, 0x81e6, 0xf8f9, 0x7f25, 0x2aa9, 0xcbd6, 0x8094, 0x098d, 0x28f4, 0xc28e, 0xe219, 0xe185, 0x6990, 0xf5c5, 0x58be,
    0xac37, 0xb06e, 0xb332, 0xaeb8, 0xeec7, 0x9a20, 0x2ef0, 0x0788, 0x8f55, 0xce6f, 0x6943, 0xfa12, 0x43e2, 0xe243, 0x1d68, 0x9daf,
    0x1585, 0xea2c, 0xbf23, 0xda8d, 0x939b, 0xcb5b, 0x76f7, 0xf776, 0xef4e, 0xe046, 0x4a34, 0xe89c, 0x3417, 0x39f3, 0x265c, 0x5dcc,
    0x4846, 0x1cb3, 0xcae6, 0x73d8, 0xd59a, 0x79b0, 0xcfaa, 0x2787, 0x8e4a, 0xde8c, 0x7dc0, 0x9721, 0xe93d, 0xb4d6, 0x5bf1, 0x3389,
    0x9f07, 0x0832, 0xbd43, 0x82a3, 0x2521, 0x2057, 0xac04, 0xbbc8, 0x9b5c, 0xf58d, 0x4621, 0xc56c, 0xa548, 0xda21, 0xff81, 0xaa5a,
    0xe100, 0xb487, 0xac40, 0x4321, 0xb40a, 0x1705, 0xc7f7, 0xc7ca, 0x4fc3, 0xf312, 0xfdfa, 0x8ee2, 0x4ae5, 0xb149, 0xe109, 0x926b,
    0xfa18, 0x13aa, 0x8095, 0x7917, 0x0ecb, 0x4c1e, 0x27ea, 0xd346, 0xf4b2, 0x494f, 0x1056, 0xae9c, 0x76aa, 0xb8d3, 0x71b9, 0x3bb1,
    0xb6f6, 0x2e52, 0x3c83, 0xde8f, 0x51bd, 0x899f, 0x0e1e, 0xaaea, 0x5cc4, 0x442e, 0x6bbf, 0x5201, 0xabbe, 0x180b, 0x5433, 0x47be,
    0xd5a7, 0x7c62, 0xb2c0, 0x04ff, 0x6b88, 0x4d3e, 0x254e, 0x268f, 0xc0ce, 0xc171, 0xaeb5, 0x53d9, 0x8897, 0x66d6, 0x435c, 0xf269,
    0xfb09, 0x5d59, 0x98db, 0x4a6a, 0x0e12, 0xfbe0, 0x07f9, 0x9486, 0xe239, 0xe2fd, 0x86a6, 0xcb23, 0xdcd4, 0x9dcf, 0x73f8, 0x6a06,
    0x9262, 0x53ed, 0xe3bd, 0x6da3, 0x3bf3, 0x2cff, 0xb07a, 0x1836, 0xc01f, 0x35ef, 0x5cee, 0xed01, 0x62b3, 0x6ab6, 0x52f8, 0xb92f,
    0xaebc, 0x4383, 0x896e, 0x26af, 0x8476, 0xf26d, 0x4a8a, 0x0262, 0x672f, 0xf671, 0x8492, 0xc1f6, 0xde7b, 0x656f, 0xfd81, 0xf24d,
    0x3507, 0x53a2, 0xafc8, 0x753c, 0xb7d6, 0x23d5, 0x6160, 0x3e66, 0x9ac1, 0xf032, 0x2c59, 0x9af6, 0xf197, 0xee98, 0xbc21, 0xd80b,
    0x1434, 0x663b, 0x6dec, 0xf8c3, 0x8896, 0x7d7f, 0x5880, 0xf22d, 0x7c58, 0x2343, 0x3169, 0x7371, 0xab1d, 0x1410, 0xafbd, 0x2173,
    0xd977, 0xd529, 0x08ec, 0x47a9, 0xf147, 0xf04e, 0x0ff1, 0x306b, 0x846c, 0x90c1, 0xa91b, 0xe037, 0xfa47, 0xc5bf, 0x0f5d, 0xcf37,
    0x4adc, 0x39e8, 0x6114, 0x2194, 0x0032, 0x20ec, 0xd6fa, 0xa47a, 0xe02d, 0x541b, 0x8cda, 0xde5b, 0xe556, 0x14c1, 0x4fe6, 0x1004,
    0x9b67, 0x31f7, 0x3c92, 0xd2bd, 0xfb43, 0xf062, 0x4664, 0xc179, 0x8e0b, 0x7606, 0x1633, 0xf530, 0x05d5, 0x0822, 0x4f8c, 0xfab4,
    0xafe4, 0x2555, 0xc05a, 0xec0b, 0xaae7, 0x16ef, 0x62d1, 0xc06e, 0xd7ca, 0x1b62, 0x7292, 0x87e3, 0x1a45, 0xea00, 0x8e15, 0x0899,
    0x4e51, 0x1793, 0x01cf, 0x1d4a, 0x59f2, 0x07bf, 0x1c2a, 0xeca2, 0x4106, 0xf3e0, 0x7a79, 0x7a6a, 0xfd0a, 0x78f4, 0xf793, 0xf651,
    0xc53f, 0xec17, 0x42f2, 0xd12b, 0xef67, 0x37dd, 0xef24, 0x45e3, 0xa1da, 0xd4af, 0xde28, 0x81c3, 0x00e8, 0x5745, 0x280c, 0x6b49,
    0xb140, 0xd76c, 0xf5eb, 0x8472, 0xadb5, 0x19f5, 0x31a6, 0x6865, 0x7845, 0xc8a5, 0xa854, 0x4918, 0x61cc, 0x8ea5, 0xee00, 0xcd80,
    0x1f79, 0x29f2, 0xb5f9, 0x72ce, 0x866e, 0x57a6, 0x7d51, 0x5ad9, 0xb471, 0xd16e, 0x46ea, 0x0df8, 0x84b3, 0xc92c, 0x1597, 0xee78,
    0x8ed9, 0x0d05, 0x2eff, 0xcbd7, 0x3684, 0x1df5, 0xc613, 0x2b87, 0x55f8, 0x167b, 0xe17a, 0x131c, 0xb0ca, 0x7424, 0xe8ae, 0x3b6b,
    0xfd4a, 0xaa1d, 0x3c8a, 0xbc01, 0x64a6, 0x8704, 0x54b8, 0x5315, 0xe94d, 0xfdeb, 0x8645, 0x042f, 0x7230, 0x875f, 0x2f02, 0xd08a,
    0x4110, 0x2ea8, 0x3f57, 0xd210, 0x9a90, 0x790c, 0x52d0, 0x1f0d, 0x1b8a, 0x93bf, 0x2847, 0xbf5e, 0xd6e0, 0x7d80, 0xe255, 0x2d53,
    0xfdf1, 0xf2b1, 0x145c, 0x2ad0, 0xc980, 0xda00, 0x58e1, 0x9089, 0x2f94, 0x0b7e, 0xa99b, 0x677a, 0x92db, 0xcd1c, 0xa55a, 0x035e,
    0x3a4b, 0x5a3f, 0x0728, 0x757e, 0xea70, 0xdda9, 0x27bd, 0x9ad6, 0xe5c6, 0xc4ee, 0x34ee, 0xaa9d, 0x259f, 0xf07b, 0xbbda, 0x75e8,
    0x3254, 0x89d0, 0x0742, 0xb83e, 0x0bee, 0xd7d4, 0x2c9f, 0xc8c7, 0xe9bd, 0xeddf, 0x3a11, 0x4a86, 0x6d31, 0xfd07, 0x7dd2, 0x1d2d,
    0x37aa, 0x33f1, 0x5f6b, 0xd6af, 0x0190, 0x0761, 0x7156, 0xedbc, 0x8afb, 0xa60a, 0xf23d, 0x9aa1, 0x3284, 0x228c, 0x1cc5, 0x5195,
    0xd7ee, 0x1202, 0x821f, 0x543a, 0xe441, 0xc332, 0x5dfd, 0xe59b, 0xf9bc, 0xabce, 0xc40a, 0x3214, 0x5a1e, 0xd882, 0xe623, 0x68e1,
    0x4b2f, 0x94f4, 0x031f, 0xafa8, 0x5314, 0x0e1d, 0x4f79, 0x2112, 0xb2af, 0xc8db, 0x784f, 0x6a30, 0x32e4, 0x0fb8, 0xee64, 0xbcc7,
    0xc6a0, 0x067e, 0x2b9d, 0x9f8c, 0x8cb2, 0x8772, 0x7a8f, 0x025e, 0xa9a7, 0xf351, 0xdc9d, 0x0a9a, 0x26df, 0x4768, 0x1878, 0xe73f,
    0xf309, 0x96f4, 0x69e4, 0x9efa, 0x181e, 0x9b3d, 0x80bd, 0xc21b, 0x2ad8, 0x0ef6, 0xd322, 0xe41c, 0x3a5c, 0xc027, 0x4639, 0x5382,
    0x92c3, 0x2d1b, 0x55af, 0xe6a2, 0xccef, 0xfcb3, 0xf09d, 0x6427, 0xa526, 0x2278, 0xcd7e, 0xb7b6, 0xed29, 0x1d21, 0x1b2c, 0xa1e4,
    0x895f, 0xfa37, 0x33c7, 0x9c51, 0x2bc0, 0xf533, 0x334f, 0x43c8, 0x2656, 0x6ed0, 0x10f0, 0x52f6, 0xb692, 0x057a, 0x19a8, 0xe1cf,
    0x4fba, 0xa3a5, 0x3fb0, 0xbe49, 0xf7e8, 0xe4bb, 0xf964, 0x3e46, 0xc025, 0xecfb, 0x373a, 0x4124, 0x8257, 0x4e29, 0x81f8, 0x6a7f,
    0xca51, 0x7954, 0x56a7, 0xb65c, 0x2b6e, 0x67d1, 0x8b10, 0x50d5, 0xe085, 0xb0c8, 0x2a40, 0xed77, 0x19e4, 0x7ef4, 0x2906, 0x2b63,
    0x6c35, 0xb16b, 0x9f84, 0xa2db, 0xdab0, 0x0b3c, 0xf109, 0x1be2, 0x4f0e, 0x9f55, 0xd1bb, 0x9618, 0xf360, 0xab35, 0xaff6, 0xbc28,
    0x85ae, 0xa4b9, 0x5ec3, 0x9240, 0x897e, 0x3e12, 0x5feb, 0x51e1, 0xe7b0, 0x95cd, 0xad51, 0x6478, 0x3966, 0x908c, 0x87f5, 0x59ae,
    0xafa9, 0x17dc, 0x8732, 0x69ce, 0x918f, 0x593e, 0xf6b2, 0x5a7a, 0xa5ce, 0x0a72, 0xa37a, 0x133f, 0x72c1, 0x33b4, 0x1c3c, 0x55d5,
    0x13a1, 0x64a8, 0x4dea, 0x54e8, 0x707d, 0x0e84, 0x4ee9, 0xe9c7, 0x2462, 0x083e, 0x6ded, 0x5ca4, 0x1394, 0xbe8d, 0x7906, 0xbd1f,
    0x2f88, 0x57c3, 0xdfd5, 0x59be, 0x91d0, 0x2ac3, 0xedfe, 0x0232, 0x6712, 0xb7e2, 0x6780, 0xc4c9, 0x69ad, 0xd27b, 0x00fa, 0x17eb,
    0xc2ba, 0x1998, 0xdf21, 0x6c6f, 0x394c, 0xdbb2, 0xccd1, 0xb92d, 0x2e43, 0xfb80, 0x59e1, 0x2044, 0xbd19, 0x1c95, 0x45f5, 0x656b,
    0xfa0f, 0xda62, 0x8b05, 0x5413, 0x3a5a, 0xfba4, 0x3455, 0x1755, 0x49ab, 0x73b6, 0x577d, 0x3016, 0x4680, 0xf716, 0xa866, 0x8f7c,
    0xdbbf, 0xd37b, 0xde42, 0xdae1, 0x950c, 0x7422, 0x1517, 0x61b8, 0x83ad, 0xc4ff, 0xb988, 0x885c, 0x7c13, 0xd4c4, 0xd77e, 0xa402,
    0xcbfb, 0x4cc0, 0xaf75, 0x11cb, 0xc6c9, 0xb892, 0x95a8, 0xf5ba, 0x6338, 0x761c, 0xf461, 0x519d, 0xe81d, 0x01a6, 0x847e, 0x9660,
    0x790e, 0x5020, 0x34dd, 0xde77, 0xa64d, 0xe2b4, 0x1b4f, 0xe695, 0xd643, 0xb6d7, 0xaca5, 0x9c6a, 0xdb73, 0x2f9e, 0x47bb, 0x9c7b,
    0xf373, 0xe2ee, 0x4584, 0xba56, 0xec48, 0xecc3, 0x1ad3, 0xaaca, 0x139f, 0x5d77, 0x0689, 0x18d6, 0x0aee, 0x70d3, 0xafcf, 0x881c,
    0x6133, 0x40c1, 0xfe8b, 0xc0fd, 0x6123, 0x5683, 0x6c1d, 0xfe27, 0x36e4, 0x501e, 0xf837, 0x75c0, 0xb23f, 0x68a8, 0x7d91, 0x4f30,
    0x808c, 0xbb7f, 0x6e4b, 0x7334, 0x717b, 0xc794, 0x4af8, 0x68d5, 0xe5d0, 0x0d4a, 0x84f4, 0x1061, 0x6fda, 0xccb4, 0xfb55, 0x958a,
    0xbfb3, 0x0905, 0xd491, 0x3c63, 0x34c8, 0xf0c2, 0x147a, 0x84c6, 0x5a6b, 0xf49e, 0x6f46, 0x4725, 0xed10, 0x52a4, 0xfac6, 0x4dae,
    0xb869, 0x0577, 0xaebb, 0x89cf, 0x3454, 0xd91f, 0x280f, 0x1b72, 0x9bab, 0xa454, 0x522a, 0xcdd5, 0x48a9, 0x3757, 0x6126, 0x9764,
    0xf5c7, 0xc3e9, 0x86dc, 0xca03, 0x6541, 0x96ca, 0x0fa7, 0xd71f, 0x2ec9, 0xc24c, 0x874f, 0x2f6f, 0x6eae, 0x9152, 0x542d, 0x2e32,
    0x7f00, 0xbcd7, 0x5c34, 0x252e, 0x9c08, 0xac55, 0x05ac, 0xc0be, 0x7791, 0x5809, 0xb2e1, 0xfd7d, 0x40ae, 0x4a42, 0x3519, 0xa8f1,
    0xe188, 0x6c80, 0x2f31, 0x34fc, 0xd52c, 0x10fe, 0x785d, 0x43a7, 0x0547, 0x7a87, 0xa929, 0x6e63, 0x1064, 0x3e0f, 0x9b08, 0x5cfc,
    0x0ec2, 0x0320, 0xc829, 0x3a97, 0xdb79, 0xe2ac, 0xd3e1, 0xdbcb, 0xb19b, 0x5903, 0xd710, 0x9a7c, 0x4e5c, 0xe68f, 0x4a9c, 0x4d1e,
    0x67e2, 0x6f54, 0xacb3, 0xebfe, 0xad5f, 0xbed6, 0x1b94, 0x59ef, 0xa937, 0xa153, 0xab4f, 0xf8c4, 0x5dc1, 0x1a6e, 0x6581, 0x09fe,
    0x46ac, 0x135e, 0x9021, 0xfc5a, 0xc149, 0x1666, 0x1e53, 0xc5ed, 0x54b5, 0xff03, 0xff95, 0x0a13, 0xb443, 0x4a91, 0x62c5, 0x0fb2,
    0xf62e, 0x321a, 0x1c0b, 0x90b2, 0xd2d7, 0xe3fe, 0xa355, 0x2be1, 0x8ad9, 0x8c42, 0xf8b6, 0xd587, 0xeb1b, 0x36b9, 0x1848, 0x8334,
    0x4518, 0x6508, 0x3e99, 0xe957, 0xa32a, 0x398a, 0x2089, 0xd920, 0xaa73, 0x5659, 0x112f, 0xcdac, 0x154d, 0xd545, 0x86b8, 0xe4d3,
    0x4c15, 0x15f7, 0xf463, 0x7d53, 0x3543, 0xe47b, 0x3135, 0x04df, 0xe54e, 0x32c7, 0x819d, 0x82e3, 0x58cd, 0x8538, 0x5d6b, 0xa7b2,
    0x27e1, 0xe8b6, 0xd7b0, 0x2490, 0x170d, 0x894b, 0x4bcc, 0x0d3f, 0x4314, 0xb207, 0xc734, 0x0c2a, 0x5d98, 0xb6c1, 0x5cd6, 0x587a,
    0x404e, 0x8c46, 0xab39, 0xbb83, 0x65eb, 0x404a, 0x40f3, 0xfc7c, 0x67d5, 0x93c3, 0x6573, 0x39ec, 0x5602, 0x5de4, 0xdea1, 0xc151,
    0x8d69, 0x5565, 0x22c2, 0x5d2b, 0xb60e, 0xff13, 0xff45, 0xe07e, 0x9407, 0x0db9, 0xd75d, 0xc4e7, 0x87d3, 0xeb8f, 0x436e, 0xe501,
    0xffa2, 0x703f, 0x1161, 0xae95, 0x4458, 0x6ba5, 0x88b0, 0xd74a, 0xae3f, 0x1f4e, 0xd1a2, 0xfe3a, 0x2d95, 0xca82, 0x4d50, 0x162c,
    0x695e, 0xb4f1, 0xc9d7, 0x7722, 0x02e5, 0xcba8, 0xb536, 0xf249, 0xb9c7, 0xb47b, 0x8f44, 0xcc78, 0xc22e, 0x3aeb, 0xb41c, 0x98a5,
    0xd33d, 0x0fd3, 0x2b89, 0x9c6c, 0x54d3, 0x2a0d, 0xe9d8, 0x0379, 0x6e07, 0x2107, 0x1a60, 0x81de, 0x71d4, 0xc18c, 0x927d, 0x3e81,
    0xd72b, 0x4a5d, 0xa345, 0xfc75, 0x88cb, 0x8c61, 0x5c7f, 0x3e9c, 0x5ede, 0x0e9f, 0xbd34, 0x8877, 0x8499, 0x5d92, 0x80a7, 0x1b8d,
    0x3aa4, 0x4c08, 0x9aa0, 0x2c58, 0x8537, 0x7c12, 0x5b2a, 0x9505, 0x5c64, 0xa85a, 0xf299, 0xf0bb, 0x22a5, 0xdd5c, 0x4961, 0x12aa,
    0xf1f1, 0x2f2f, 0xa28d, 0x5605, 0x2de7, 0x36cd, 0x29b8, 0x6308, 0xac9d, 0x71da, 0x1fd4, 0xf0a0, 0xaf62, 0x7733, 0xc6b2, 0x732a,
    0xae93, 0xd838, 0xb04d, 0x8075, 0x33f3, 0x9154, 0xf8fa, 0x500a, 0x6e97, 0x449d, 0x4e4e, 0xcece, 0x1cbf, 0x8c16, 0x0aac, 0x1b45,
    0xbde6, 0x03f8, 0x94f5, 0xc2b8, 0xa175, 0xdd0b, 0x63c6, 0x7a24, 0xc358, 0x66fb, 0x98e2, 0xe208, 0xf27e, 0xca3e, 0x80cf, 0x73ac,
    0xa4b6, 0xa773, 0xc3e7, 0xf55b, 0xf349, 0xa530, 0x460d, 0x09ef, 0x1435, 0x4c69, 0x1956, 0x848e, 0xb304, 0x23f4, 0xc039, 0x138a,
    0x104d, 0x63f7, 0xa622, 0x33fe, 0x41e1, 0xa83f, 0x1c70, 0xd3fe, 0xe781, 0x330c, 0x2aff, 0x0eab, 0x5396, 0xe3e0, 0x5a30, 0xfc72,
    0x2829, 0xcc7f, 0x2149, 0x64de, 0xe0a6, 0x218c, 0xa313, 0x5e3a, 0x5837, 0xd61b, 0x4d10, 0xf763, 0x7516, 0x8ac2, 0xe5ad, 0xc9cd,
    0x2660, 0xe5fd, 0x5c49, 0xe364, 0x2810, 0x3c87, 0x715a, 0xd326, 0xddbf, 0x4046, 0x63ca, 0xb8bd, 0x8482, 0xdfd9, 0x7861, 0x1a64,
    0x745b, 0x93f0, 0xc4a5, 0x8b86, 0x4623, 0x2027, 0x2025, 0xb2f5, 0xda78, 0x34af, 0x65d4, 0x8172, 0x87e9, 0xe99e, 0x9506, 0xaa69,
    0xc8ff, 0x3ea4, 0x5fc3, 0xcd8b, 0x6eb6, 0x2fc0, 0x7b15, 0xb99b, 0xbe22, 0x9bf8, 0x7888, 0x73ff, 0x86c4, 0x2d68, 0xe097, 0xb8b3,
    0x5087, 0x37f9, 0xdffe, 0xb622, 0xdc36, 0xb962, 0x81b0, 0x128f, 0x4857, 0x5af8, 0xd702, 0xb598, 0x270d, 0x287d, 0xb66e, 0xc02f,
    0xbefe, 0x70d9, 0xdf62, 0x7199, 0x4198, 0x65e7, 0x7205, 0x1252, 0x0d19, 0x177b, 0x7991, 0xd137, 0xd05e, 0x06f3, 0x820a, 0xdd9e,
    0x4946, 0x6305, 0x091f, 0xbf44, 0x48ab, 0x3256, 0xd8c1, 0x93b0, 0xbc70, 0x1c81, 0xf58b, 0x7d00, 0x9338, 0x15bf, 0xe4cd, 0xdc2c,
    0x3bf2, 0xdda8, 0x8aa4, 0x9f99, 0x2828, 0xbaba, 0xdf20, 0x90b1, 0x594e, 0x838f, 0xe08f, 0x4658, 0xa010, 0x0f5b, 0x2bd2, 0x9f36,
    0x638d, 0x13da, 0xe978, 0x4e8c, 0xd328, 0x9723, 0x70f8, 0xae7c, 0xd5dd, 0xdd41, 0x58f5, 0xfce6, 0xf267, 0xcd66, 0xe1e1, 0xbdbd,
    0xf4a9, 0x2c6c, 0xc98b, 0x28a7, 0xeaf9, 0x855d, 0x4181, 0x1eea, 0xdb3f, 0x8a14, 0xb8b9, 0xb498, 0xb279, 0x4840, 0x55c1, 0xb690,
    0xf250, 0x960d, 0x88ef, 0x0b9c, 0x3b10, 0x9563, 0x6988, 0xc1f2, 0x0e87, 0x8a29, 0x4215, 0xf492, 0xb4a4, 0x236c, 0x228a, 0x9ed8,
    0x71b0, 0x275d, 0xfa1b, 0x05e2, 0x2e13, 0xe62e, 0x4ec3, 0x924b, 0x412d, 0xe425, 0x6783, 0x1325, 0xde64, 0x4921, 0x8eeb, 0xed0a,
    0x301f, 0x5cad, 0x106a, 0x9c73, 0x9a85, 0x82ec, 0x0c33, 0x81e7, 0xb4a1, 0x7d09, 0x0eb4, 0xced7, 0x251a, 0x744e, 0x132e, 0x2ee6,
    0xfa30, 0xa8ce, 0x423f, 0x4b30, 0xd652, 0x4e35, 0xa3dd, 0xce3d, 0x427a, 0x8830, 0xfdaa, 0x4ac5, 0x37a3, 0xa392, 0x7d63, 0x26d7,
    0x639a, 0x0615, 0x2e6b, 0x2c3d, 0xb2b9, 0x1cf6, 0xef50, 0xe0a8, 0x47a2, 0x663c, 0x5a0e, 0xcc52, 0x0d30, 0x40ef, 0xc93e, 0x9f40,
    0xdd3a, 0xa74d, 0x2b57, 0x07cc, 0xe4e4, 0xecec, 0xf396, 0x669b, 0xa4e1, 0xa50f, 0x5772, 0x15e3, 0xda71, 0x9dac, 0xd6f2, 0xe6e4,
    0x3ba8, 0xbabb, 0x4a28, 0xd9e2, 0x5a07, 0x6be7, 0x7580, 0x4db0, 0xe0d9, 0xc944, 0x3a89, 0x2edd, 0x9d6e, 0xa6d3, 0x1f1f, 0xf2f2,
    0x9de3, 0xf9c6, 0x99ee, 0x7e98, 0x4d49, 0x1b73, 0x9412, 0x8ee8, 0x5cf5, 0xdde2, 0xbdc7, 0x5bc3, 0x25fd, 0x3349, 0x8657, 0xf66d,
    0x1c8e, 0x4164, 0x4042, 0xfdda, 0xa4a9, 0x83e1, 0x4f4a, 0x3cda, 0x326d, 0x15a7, 0x4898, 0xe91a, 0x6ea7, 0x4bed, 0xaa2f, 0x5b2b,
    0xb6b6, 0xa2a2, 0xd9ab, 0xfd8e, 0xd13f, 0xb26a, 0x3596, 0x9953, 0x5b0f, 0x10a0, 0x8782, 0x4bd4, 0x9790, 0xb504, 0x2fa6, 0xbf54,
    0xc076, 0x5185, 0x7cae, 0xf870, 0x6352, 0xb69a, 0xa841, 0xce71, 0xb11d, 0x5227, 0xd3d3, 0xe0e0, 0xbb92, 0xaf18, 0x2ae2, 0x7dc8,
    0x76a1, 0x8e33, 0x14d2, 0x672b, 0xe1ec, 0x79d3, 0x4939, 0xf1c3, 0x8c88, 0x6756, 0x9384, 0x2511, 0xd3b2, 0xe9fa, 0xbbec, 0x94ea,
    0xa29a, 0x23bc, 0x3e88, 0x51fe, 0xe015, 0x99fa, 0xee45, 0x4301, 0x5e7d, 0xd30c, 0xf71c, 0xa469, 0x11f3, 0x70b4, 0xddbb, 0xcce5,
    0x9ee2, 0x94d7, 0x8052, 0xc7d7, 0x454b, 0x1b7e, 0x851c, 0x2b20, 0x8f12, 0xb081, 0x1bc4, 0xa9b1, 0x6ecd, 0xb17f, 0x0c00, 0xf243,
    0x035d, 0x73f7, 0x682d, 0xc486, 0x15e2, 0x2afe, 0xff02, 0x6711, 0xcf16, 0x5142, 0xe29e, 0xd794, 0x87a6, 0x6e17, 0x1d3f, 0xaeab,
    0xa733, 0x7bf7, 0x3a1d, 0xebc2, 0xc470, 0x4036, 0x0544, 0x3d0f, 0x39c1, 0x5822, 0x0a56, 0x2d2e, 0xcaff, 0x0985, 0x5f7d, 0x16e5,
    0xb8ca, 0xfc78, 0x5589, 0x2942, 0x113e, 0x2bd5, 0xfb57, 0x145e, 0x7b63, 0x0ef9, 0x2568, 0x7445, 0x11af, 0xa800, 0xa61c, 0xd96d,
    0x542a, 0x248c, 0x7700, 0x66c0, 0x6f14, 0xc0e1, 0x1406, 0xb5a4, 0x8b19, 0x7a98, 0x27c6, 0x7d5a, 0x466d, 0xef2d, 0x27f3, 0x0802,
    0x1520, 0xf6bb, 0x1483, 0x95b1, 0x1b9d, 0x2092, 0x40fc, 0xb53f, 0x6991, 0x720e, 0xa31c, 0x29c1, 0xee4e, 0x054d, 0x0c3c, 0xf39f,
    0xa10a, 0x7a49, 0x1145, 0x4f6c, 0xdc5c, 0x5a4c, 0xaae0, 0x5b48, 0xfac5, 0x3e80, 0xf266, 0x6e16, 0xbcc8, 0xe89b, 0x4105, 0x6ecf,
    0x12b4, 0xba22, 0x530e, 0xecb6, 0x052b, 0x1697, 0xafbe, 0x8b72, 0x7b8e, 0xd234, 0xeedd, 0xe672, 0x49c2, 0x9288, 0x5df6, 0x4a75,
    0xeadd, 0x1448, 0xac19, 0x032f, 0xd795, 0x7068, 0x6ec6, 0x0d64, 0xbc68, 0xe49d, 0x3342, 0x62e9, 0xf40b, 0x8d99, 0x87e5, 0xc5ef,
    0x47b5, 0x5365, 0x73a5, 0xf193, 0xc716, 0x1d1e, 0x5a14, 0xf510, 0x96e8, 0x6af2, 0xd912, 0x26ce, 0xfbaf, 0xceb2, 0xe090, 0x94cc,
    0x2f1b, 0xced1, 0x18cf, 0x2475, 0xbb13, 0x1b97, 0xd6a5, 0x401a, 0x9271, 0x8601, 0x9bac, 0x44e9, 0xa27e, 0x6d34, 0xd1b4, 0xfa89,
    0xa85b, 0xe6c8, 0xa94a, 0xa19c, 0xb952, 0x526c, 0x54ae, 0x9b14, 0x7439, 0x5283, 0x0e98, 0x8deb, 0x3dc4, 0xe7ed, 0x7051, 0x40ab,
    0x8fb9, 0xdb3c, 0xe99a, 0x7b6a, 0x3b43, 0x2c17, 0xb1b8, 0x0b23, 0xfb97, 0x6b09, 0x0ae6, 0xc093, 0xa0dc, 0x7acf, 0x6e19, 0x5853,
    0x8945, 0xc55c, 0x8e4d, 0x3c72, 0x0470, 0x63bb, 0x16f2, 0x0ed7, 0x27b0, 0x127b, 0x3e8b, 0x5b71, 0xf442, 0xba86, 0x9c7e, 0xee94,
    0xabb5, 0xf1eb, 0x7806, 0x4c9c, 0x5b9c, 0x5447, 0x0bba, 0x3f3d, 0xd43d, 0x0283, 0xa7b9, 0x379a, 0x5aca, 0xa9c6, 0xb42e, 0x7ba1,
    0x93cf, 0x8930, 0xa429, 0x56ce, 0xdf38, 0x73bc, 0xbcbf, 0x04cc, 0x2bac, 0x9981, 0xb1fc, 0xf122, 0x1187, 0x271e, 0xcbba, 0x31d7,
    0x1ccb, 0x3b95, 0xad39, 0x1905, 0x016f, 0xa0da, 0xcb83, 0x0ccf, 0x7119, 0x318c, 0x868a, 0xfb23, 0x91e7, 0xd7ac, 0x8549, 0x98af,
    0xaaac, 0x31ad, 0xdc5d, 0x7e6e, 0xe899, 0x564a, 0x35a3, 0xf046, 0x4bb1, 0xb8e8, 0x64fa, 0x5fa5, 0xc523, 0x007c, 0x12bc, 0x714a,
    0x3d78, 0x5931, 0xc6d1, 0xbb45, 0xec97, 0x3747, 0xe892, 0xc159, 0x0927, 0x224a, 0x5265, 0xff3d, 0x6fee, 0x675e, 0xa357, 0x7a7b,
    0x1802, 0xc606, 0x216d, 0x82ab, 0x1223, 0x356e, 0x20ca, 0x37cc, 0x5f2f, 0xfcbb, 0xb3d4, 0xa389, 0xf79b, 0x0e5b, 0x0eb1, 0x0d24,
    0x8b25, 0x5ed3, 0x5bdc, 0x011a, 0x911e, 0x600b, 0x6e0d, 0xd807, 0x703d, 0x1af3, 0xf481, 0x2416, 0xd4b1, 0x398c, 0x67f4, 0x544d,
    0x51f8, 0xb556, 0xbd54, 0x9e1e, 0x1181, 0xb1ec, 0x5b05, 0xdec1, 0x5c54, 0xe186, 0xaa65, 0x4abc, 0x4b85, 0x3155, 0xf8d6, 0x8718,
    0xa9da, 0x4ee3, 0xfdca, 0x9e82, 0x4062, 0x1a02, 0x3cd0, 0x1f3f, 0x8072, 0xe757, 0xca01, 0x5f9d, 0x397d, 0xee65, 0xd3f3, 0xa0bb,
    0xdf82, 0xe50b, 0x42f9, 0xe0b7, 0xe271, 0x7118, 0x4235, 0x2174, 0xcba7, 0x717a, 0x2b1f, 0xdf1f, 0xb06d, 0x6617, 0xe6a1, 0xc059,
    0x6bb6, 0x58a0, 0x8cfa, 0xd6da, 0xf60b, 0xe29f, 0x9bee, 0xf7b3, 0x98fb, 0xcdb3, 0x7831, 0xfda1, 0x1cf4, 0x256e, 0x1076, 0x0019,
    0x3caa, 0xe528, 0xb3e8, 0x15b7, 0xd1d2, 0x27dd, 0xf25d, 0x7bf4, 0x4b7a, 0xf984, 0xcd9e, 0x0c0f, 0x033f, 0x6350, 0x43b9, 0x4659,
    0xcb06, 0x7928, 0xcab1, 0x1d88, 0x1636, 0xfa54, 0xc2ae, 0xf57c, 0xb182, 0x24a3, 0x192b, 0xa455, 0xb86c, 0x5f7f, 0xb2f3, 0x20cc,
    0x7e3c, 0x5c65, 0x95ea, 0x089f, 0xbdfb, 0xd399, 0x201b, 0x6238, 0x11de, 0x514d, 0x4cfd, 0xf00a, 0xc719, 0xbb50, 0xbce9, 0x70f6,
    0x95ee, 0xe491, 0x5269, 0xaae4, 0x504e, 0x36fa, 0xe471, 0x0fe4, 0x8d1a, 0xb6a6, 0x625d, 0xb313, 0x292c, 0x4255, 0xaa85, 0x45c6,
    0x1165, 0x5d6f, 0xa37e, 0x2813, 0x5fc7, 0x5a34, 0x0eb8, 0xff06, 0x33cb, 0xe8b2, 0x86aa, 0x5884, 0x8e6d, 0x8ff3, 0xe969, 0xcbda,
    0x683d, 0x31bb, 0xc56a, 0xa67f, 0xf6c9, 0xaaf7, 0x3e77, 0x5373, 0xb564, 0x0b39, 0x5249, 0xe536, 0x3545, 0x7847, 0x5d7d, 0x0937,
    0x4425, 0xba0d, 0x566d, 0xfd6d, 0x7b7d, 0x5b57, 0xc72a, 0x2076, 0x97f8, 0x3f62, 0x21f2, 0x8827, 0xeac1, 0xd860, 0xe48d, 0x0c9d,
    0x6595, 0xa73a, 0x83d0, 0x936a, 0x66d4, 0xf2de, 0x17d2, 0x585f, 0x7f34, 0xe272, 0x9e61, 0xbc1d, 0xd96f, 0xea3a, 0xc15b, 0x8a5b,
    0x0d13, 0x7839, 0xb39d, 0x5a4d, 0x536d, 0xfa45, 0x9502, 0x8bb8, 0x234e, 0x17a1, 0xd537, 0x463f, 0x13b8, 0x12cb, 0x0fc4, 0x53fb,
    0x5cbb, 0xe689, 0x4e94, 0xbac9, 0x7696, 0x7405, 0x5193, 0x8f1a, 0xd927, 0x13e8, 0x3807, 0x4271, 0xd846, 0x4969, 0x1c1d, 0xcc8d,
    0x5d23, 0x0913, 0x502e, 0x8cba, 0xa4c7, 0x97c5, 0xfabc, 0x19a6, 0x6c8e, 0x85ba, 0xfaf1, 0x3228, 0x52cd, 0x0fe1, 0x8c54, 0x09b7,
    0xefeb, 0x0d97, 0xdd7a, 0xd44a, 0xd228, 0x5007, 0xe891, 0x8f19, 0xdb3e, 0x5821, 0x5229, 0x8876, 0x00e7, 0x4e28, 0xb87b, 0x3388,
    0xe1c9, 0xeab3, 0xc636, 0xbb68, 0xcc06, 0x7f6d, 0x742f, 0x85d6, 0x913b, 0xebe4, 0x58bf, 0xd007, 0xcc12, 0x8fd0, 0xcde7, 0x5e75,
    0x51b4, 0xc0aa, 0x740b, 0x4eb2, 0x7266, 0x6672, 0x0b19, 0xf20d, 0x6892, 0xb7cb, 0x816e, 0xd649, 0xf805, 0xd6cd, 0x0fb9, 0x455c,
    0x3ce9, 0xa0cb, 0x833e, 0xa56d, 0xab1e, 0xdf9c, 0xdc53, 0x9af2, 0x7abc, 0x0f1a, 0xd36c, 0x72de, 0xd66c, 0x267f, 0x9164, 0x6491,
    0x3df8, 0xcf92, 0x504a, 0x3ba2, 0x010d, 0x3120, 0x5143, 0x94c6, 0x6cad, 0xa8be, 0x9066, 0x0309, 0x7b38, 0x74de, 0x6fec, 0x12fe,
    0x35aa, 0x0c8f, 0x3525, 0x6dcc, 0x7c4c, 0x62d8, 0x3973, 0x6ef7, 0x2fb5, 0xba9d, 0xa7a4, 0x597a, 0x594f, 0x8c2b, 0x68e7, 0x8d97,
    0xf591, 0x0e54, 0x25bb, 0x011d, 0x1b66, 0x1709, 0x5a43, 0x0fbc, 0x522b, 0x6beb, 0x2f33, 0x0f5f, 0x5d7b, 0xfba8, 0x6f58, 0xdd60,
    0x8996, 0x0da2, 0xf0bc, 0xd74d, 0x8a98, 0xf8cf, 0xe467, 0xd705, 0xc9b8, 0x0c96, 0x4033, 0x4e2c, 0x8605, 0x544b, 0x0917, 0x661b,
    0x0e15, 0x7651, 0x80e7, 0x0ea5, 0xb168, 0x6037, 0x602d, 0xf605, 0x87f8, 0x9835, 0x0476, 0xa3d4, 0x2c40, 0xf916, 0x36f6, 0xfc61,
    0x99a7, 0x21e4, 0x99e3, 0xce28, 0xf84e, 0xb213, 0xaad7, 0x7351, 0xa7bc, 0x1089, 0x818f, 0x57d4, 0xaefe, 0xf2cd, 0xc10f, 0x2a1d,
    0x387c, 0x573e, 0x74bc, 0x2746, 0x6f90, 0xc858, 0x4552, 0xcfcc, 0x40d8, 0x8947, 0x6fff, 0x5b11, 0xbd8a, 0xdccd, 0xafe1, 0xe6c5,
    0x7f81, 0xb388, 0xb416, 0x6243, 0x428e, 0x1590, 0x4029, 0xe3eb, 0xd420, 0xe738, 0x3e57, 0x7c38, 0x1acb, 0xcca9, 0xecd5, 0x7ec7,
    0x6097, 0x402f, 0x505e, 0x95be, 0x608f, 0x7ce6, 0x5b3f, 0x0a29, 0xa9b7, 0xd009, 0x2175, 0x2530, 0x2622, 0xe4dd, 0xa65f, 0x13f0,
    0xaae1, 0x3f54, 0x91f2, 0x69fa, 0x629e, 0x29b1, 0xfb62, 0xd821, 0x8c32, 0x124b, 0x32b9, 0xce34, 0xca27, 0x87cb, 0x9c8d, 0x79c6,
    0x2fcf, 0xcf2f, 0x681d, 0xaf9d, 0xd229, 0xaf6e, 0x65d0, 0x749e, 0x76b2, 0x69c7, 0x5ab0, 0xbe11, 0x0b05, 0x5ae1, 0xaf87, 0x9997,
    0xcd4f, 0x6501, 0xd601, 0x36c1, 0x7299, 0x0877, 0xee06, 0x347b, 0x9b93, 0x5bcb, 0x552c, 0x2c55, 0x7463, 0x6957, 0x762e, 0x935d,
    0x50f3, 0x2ce0, 0x76ea, 0xd4be, 0x70ac, 0x44c8, 0x0ae3, 0x53d6, 0x1b0b, 0x2a7d, 0x206a, 0xff6d, 0x6558, 0x123a, 0xc2cc, 0x3829,
    0xbff9, 0x4417, 0x8550, 0x24bd, 0xad86, 0x762d, 0x0fe0, 0xf79a, 0x2941, 0x88ee, 0x4c07, 0xf5c6, 0x50d4, 0x31a5, 0x2056, 0x90a1,
    0xc5a8, 0xdee7, 0x49fc, 0x7488, 0xdc6d, 0x699d, 0x7a40, 0xbeac, 0x67e4, 0x05d7, 0x6894, 0x39d1, 0xbfd4, 0x874c, 0xee10, 0x32e5,
    0x2e49, 0x0d3b, 0x7b5d, 0xa8fb, 0xd09b, 0x1411, 0x37c6, 0xde0b, 0xf42f, 0x1a08, 0xe7de, 0xa8c5, 0x46f6, 0xf3c9, 0xd28d, 0xc31d,
    0x6517, 0xe150, 0x67ba, 0xfa61, 0x470c, 0x0364, 0xb9ed, 0xcf17, 0xa46b, 0x2261, 0x4c9e, 0xe8da, 0x0bd0, 0x25d8, 0x7c25, 0x6ab4,
    0xb9a6, 0xfd5f, 0x778e, 0xe71b, 0xd86b, 0x4812, 0xae4c, 0x8d33, 0x569c, 0xc9b4, 0x7d45, 0x18f8, 0x03b7, 0x8390, 0x61ca, 0x96dd,
    0xb6ed, 0xedb6, 0xd8ef, 0x9abd, 0xd2ed, 0x93a8, 0x5d06, 0x49e7, 0x05f8, 0xcdd6, 0x564d, 0xfa27, 0x2be8, 0x3b69, 0x578f, 0xe341,
    0x477e, 0x1bb5, 0x53dc, 0xf29a, 0xaed2, 0xc6e8, 0xa101, 0x1ea0, 0x2275, 0x11db, 0xda65, 0x65da, 0x4637, 0x9576, 0xda74, 0xadd3,
    0xefa1, 0xb9ca, 0x97d8, 0x0fd1, 0xfb6c, 0x8560, 0x4f63, 0xaefb, 0x14c3, 0x0322, 0xa5de, 0x0f1c, 0xa78f, 0x7e30, 0x4f20, 0x013b,
    0xde86, 0xc71c, 0x4c13, 0x3581, 0x9a51, 0x0c92, 0x253b, 0x3f0b, 0x5909, 0x4d28, 0x3127, 0x4b27, 0x2cbb, 0x4806, 0xa2ed, 0xdb18,
    0xb779, 0xde75, 0xb740, 0x24eb, 0x6f77, 0x776f, 0x60e3, 0xba4e, 0x9d14, 0xdcfe, 0xcb44, 0xd106, 0xb276, 0xc769, 0x8807, 0xf02e,
    0x4de8, 0x088a, 0x34ab, 0xad40, 0xf339, 0x1734, 0x01d6, 0xc136, 0xc7ab, 0xa0f1, 0xe1be, 0x3fbf, 0x7f50, 0xc283, 0x3e24, 0x243e,
    0x3c7a, 0x7e85, 0x79f0, 0x2083, 0x7500, 0x8d22, 0x0db1, 0x6be5, 0xe2df, 0xfd23, 0xc860, 0x4236, 0x0a08, 0xd58e, 0x91a1, 0x3e2c,
    0x02bd, 0x5b49, 0x3768, 0x132b, 0x8e90, 0xf694, 0x113c, 0x5293, 0x07dc, 0x1972, 0xe46d, 0xd957, 0x6c41, 0x2d0f, 0x55e7, 0x7cde,
    0x66b3, 0xf933, 0xeea0, 0xeaee, 0x87ad, 0x5008, 0xc1c7, 0x2ca7, 0x943e, 0x9386, 0x2d7c, 0xa42b, 0x16b4, 0x4362, 0x4dfc, 0x5f11,
    0xb70b, 0x43d3, 0x28a1, 0x678b, 0xd8bf, 0xb766, 0xd840, 0x4789, 0x578c, 0x5dc9, 0xa913, 0xd88e, 0x5a82, 0x4bc8, 0x0850, 0xad87,
    0x7be8, 0xae72, 0xb7a1, 0x31c7, 0x4385, 0x5d94, 0xe669, 0x0879, 0xd855, 0x9eaf, 0xbad4, 0x4803, 0xa5bb, 0x767c, 0xdd4c, 0xd33b,
    0x53d0, 0x5fb9, 0x89ed, 0xa228, 0x4f08, 0x5c93, 0x7f74, 0x3465, 0x03c7, 0xa977, 0xd2c9, 0xcc49, 0x28f5, 0x811d, 0x15f5, 0xe063,
    0x0982, 0xe994, 0x2928, 0x7fcc, 0xd056, 0xb4fe, 0xe4ae, 0xc62b, 0x6a31, 0xb9f7, 0x4e74, 0x1a25, 0x9cb7, 0x34db, 0x7592, 0xa05b,
    0x4b92, 0xc34e, 0x316a, 0xf7b9, 0x4f3a, 0xe832, 0x146d, 0xb02a, 0xff2a, 0xab0e, 0x6df3, 0xbf8d, 0x54e6, 0x658d, 0xa6e5, 0x8e54,
    0xaeac, 0xfd84, 0x7df0, 0x0709, 0xa9f6, 0x4931, 0x967f, 0x9df9, 0xda43, 0x7080, 0x8b82, 0x5a05, 0x09d5, 0x7d0c, 0x260f, 0x8765,
    0xf958, 0xfef8, 0x6d00, 0x64c0, 0xad1f, 0x9d25, 0xeed4, 0x7538, 0x14f9, 0x8fbc, 0x2bd3, 0x4337, 0x8682, 0xc76c, 0x8efa, 0x1b42,
    0xb1fb, 0x8826, 0xd41f, 0xa0f0, 0xe63f, 0x9414, 0x10c6, 0x7053, 0x9797, 0xf8f8, 0x9b66, 0x96f3, 0x6c1c, 0xd749, 0x48aa, 0x99f9,
    0xd3a6, 0x6e9d, 0x7676, 0x7272, 0xdd5d, 0x1dd4, 0xb5f3, 0xad03, 0x93ae, 0x38d8, 0x7317, 0x9709, 0xae56, 0x980f, 0x4176, 0xcd42,
    0x2778, 0xa3f8, 0xe6ff, 0x5d10, 0xaf33, 0xf737, 0xc4a1, 0x1159, 0x4c84, 0x0ac7, 0xb310, 0x2844, 0x6602, 0x5fde, 0xb4b3, 0xa02b,
    0x1612, 0xa370, 0x0a19, 0x0562, 0x5dad, 0x8f5f, 0x5d46, 0x1728, 0xb7fd, 0xa881, 0x1bfd, 0xafc4, 0xf0dd, 0x86f7, 0x9c85, 0xb25a,
    0xa3c0, 0xf0b8, 0xe75a, 0xf9d7, 0x22a7, 0x3509, 0xd22b, 0x369f, 0xf3fb, 0xee1b, 0x3086, 0x9b82, 0xfbfb, 0x8989, 0x8efd, 0xabd9,
    0xc168, 0xcbf1, 0x5de7, 0x9b77, 0x2752, 0x1db1, 0x4949, 0xebeb, 0xdcb1, 0xf452, 0x642a, 0x6633, 0x28d3, 0x2397, 0xe640, 0x9cfa,
    0xef58, 0x9a72, 0xd907, 0x62b1, 0x3cdc, 0xca46, 0xfa8b, 0x9102, 0xb21e, 0xb6bd, 0x7f08, 0x966a, 0xe50c, 0x554a, 0xb2cb, 0x6480,
    0xcc0c, 0x5d61, 0x8ea3, 0x0c66, 0x34f6, 0xbaef, 0xa10b, 0xaa11, 0x0c4b, 0xdde8, 0x320c, 0x0950, 0xd569, 0x6b94, 0x9f52, 0xeba9,
    0xc0c5, 0xe8ac, 0xdd7b, 0x6cc8, 0xccc4, 0x81aa, 0x36dc, 0x62b9, 0x8909, 0xd2a8, 0x8d4e, 0x4799, 0x857b, 0xb75b, 0x4251, 0x16cf,
    0x5380, 0x54c9, 0xf3ba, 0x7ba9, 0xd7c7, 0x5280, 0x7b85, 0x5bb7, 0x24be, 0x1091, 0x1f5a, 0x8b40, 0x97e0, 0xb3b8, 0x8842, 0x8e88,
    0x4353, 0xe591, 0x39fc, 0x3503, 0x2e77, 0xf680, 0x297c, 0xdc97, 0x7efd, 0x4771, 0xf084, 0xc935, 0x082b, 0x574e, 0xb8dc, 0x9dd8,
    0xd4cd, 0x33bd, 0x52ad, 0x01af, 0x1a77, 0xd54e, 0x5ded, 0x3af4, 0x2375, 0x06fc, 0x8acb, 0x773c, 0x70bd, 0x098e, 0x7457, 0x9db5,
    0x957f, 0x8755, 0x2d18, 0x7e39, 0x2688, 0xfbb1, 0xf2d6, 0xe4e6, 0x0fea, 0x7850, 0x6359, 0x3995, 0x2727, 0x6767, 0x0556, 0x8da2,
    0x2bb9, 0x8af1, 0x6b79, 0x7372, 0x9d44, 0x976e, 0x8f8f, 0x7979, 0xb3c1, 0x8992, 0xc775, 0x7685, 0x075a, 0xe76b, 0x0997, 0x1773,
    0xa348, 0x1d40, 0x3da5, 0x23a4, 0x9f39, 0xd823, 0x4a6c, 0x98a7, 0x2adb, 0x5706, 0xfad1, 0x59d2, 0x38e3, 0x176a, 0x87b8, 0xbcfd,
    0xf260, 0x5876, 0xba3a, 0x2853, 0x4e2f, 0xf974, 0x9a46, 0xcf71, 0x6468, 0x0f8b, 0xd579, 0x9f37, 0xe997, 0x04fc, 0x6723, 0x9e71,
    0x2e3c, 0xf028, 0x5077, 0x7775, 0x8dbf, 0xf36d, 0x859a, 0xec82, 0x369d, 0xeb74, 0xd5e3, 0x78d0, 0xc245, 0xd986, 0x1bd6, 0x3758,
    0x31ba, 0xabb4, 0x24ea, 0x74bb, 0xfe33, 0x22a6, 0x45c2, 0x86d9, 0xa922, 0xe667, 0x0a99, 0x8cd9, 0xeb8e, 0x0aed, 0x94e9, 0x8209,
    0x20d0, 0xa683, 0x37d0, 0xe676, 0x8d9b, 0xce2c, 0x6be9, 0xff71, 0x8c93, 0x0c30, 0x28c3, 0xb124, 0x8e58, 0x7bad, 0x8c9a, 0x78d4,
    0xe505, 0xe95b, 0xe9cb, 0x2f73, 0xc033, 0x64e2, 0x924f, 0xa9b5, 0xa1e8, 0x72d2, 0x183a, 0xe03b, 0xd742, 0x5cd2, 0x673d, 0x9594,
    0x888e, 0x4288, 0x5d03, 0xf773, 0x39cf, 0xfe34, 0xcd2c, 0x8c96, 0xdb4d, 0xad13, 0x7d28, 0x0d27, 0x7938, 0xc366, 0xddcd, 0x376b,
    0x9bb9, 0x157b, 0x4ddb, 0x13ad, 0x6155, 0xa5dc, 0x49b9, 0xc816, 0xc41b, 0xb1a9, 0xaa81, 0xc4cc, 0x5eec, 0x0751, 0x9a0c, 0x9415,
    0x6510, 0xe61b, 0x675c, 0x9a06, 0xded7, 0xb990, 0x618b, 0x31f1, 0x652d, 0xe354, 0x4db8, 0x62a4, 0xf92c, 0xdf83, 0xd151, 0x539e,
    0x8917, 0x8fe5, 0x93ec, 0xf409, 0x273f, 0x6a3f, 0x97a5, 0x7a4a, 0xdd73, 0x0ff8, 0x36ab, 0xb6fe, 0xb1bf, 0xf84b, 0xbf66, 0xdb5b,
    0x0935, 0xa722, 0x8287, 0xd44b, 0x5b41, 0xfad3, 0x927f, 0xe3bf, 0xb1b1, 0x8080, 0xb190, 0x20df, 0xd935, 0xe762, 0x7cc0, 0xb572,
    0x66cd, 0x67f2, 0x0606, 0x9b9b, 0x944c, 0x0d9e, 0xeaf6, 0x9d22, 0x76c0, 0x8551, 0xfa9c, 0x40e6, 0xfa4d, 0x68a0, 0x5239, 0x969b,
    0xf85f, 0xacf9, 0x232e, 0x3186, 0xef91, 0x0cd5, 0x443d, 0x8516, 0x7573, 0x8a94, 0x4597, 0x9e59, 0xd1a8, 0x6a6b, 0xbdf8, 0xfcb0,
    0x03e0, 0x291e, 0x71fd, 0xfa70, 0x903e, 0x82c4, 0x37ea, 0x8132, 0x4aa8, 0x2585, 0xb435, 0x22d5, 0x02fd, 0x6663, 0xe21a, 0x4f93,
    0xae41, 0x6b8a, 0x387e, 0x2729, 0x1e6a, 0x9c05, 0xba19, 0x995e, 0xdf75, 0xec69, 0xc8dc, 0xc1d1, 0xd04a, 0x8ae8, 0x461f, 0x19d5,
    0x7c59, 0x4c7a, 0x0bca, 0xb7d2, 0x90e7, 0x0205, 0x59b8, 0x9bc9, 0x3179, 0x14e5, 0x920f, 0x060c, 0xaced, 0xbba2, 0x2406, 0x21a0,
    0x2c3f, 0x7e2f, 0x6e18, 0x45c5, 0x800e, 0x5574, 0xb30f, 0xb123, 0x8895, 0xc331, 0x810d, 0xbfd7, 0xc8fe, 0xa2a1, 0xaf74, 0x248f,
    0x9679, 0x45b8, 0xf4ef, 0xb335, 0x0b78, 0x06d5, 0xab2a, 0x6b4c, 0xa011, 0xc5bd, 0x0fa4, 0xb120, 0xf645, 0x3cc1, 0x631a, 0x5686,
    0xd59e, 0x0c26, 0x6fb3, 0xbc32, 0x59f6, 0xf4b6, 0x92df, 0xd7f2, 0xd143, 0xa4e5, 0x1cc3, 0x6391, 0x6127, 0x83b1, 0x4e60, 0xd72f,
    0x268c, 0xb1b5, 0x28d7, 0xd3aa, 0x9042, 0xc3b3, 0x12ab, 0x8452, 0x4710, 0x14c7, 0xca2b, 0xe1cd, 0xb956, 0x2bb0, 0xd84a, 0xa9de,
    0x89a1, 0x0dbb, 0xe76d, 0xb38a, 0xffa0, 0x2da6, 0xecad, 0x7bcf, 0x800f, 0x78a4, 0x6259, 0x0277, 0x4096, 0x7369, 0xda8a, 0xd8ec,
    0x04f6, 0x624f, 0x6679, 0x5d16, 0xe3b7, 0x6c7e, 0x269c, 0x28bf, 0xf827, 0x0596, 0xff87, 0x2c34, 0xbd29, 0x7fbd, 0x8b98, 0xc885,
    0xa776, 0xc3a9, 0xa763, 0x0de4, 0x1067, 0xf770, 0x86da, 0x1037, 0x6296, 0xd072, 0x473b, 0x6cbc, 0x58e4, 0xc730, 0x7873, 0xf28a,
    0x603a, 0xae37, 0x534d, 0xa834, 0xb567, 0x8309, 0x09a3, 0x6c6d, 0xebac, 0x08bb, 0x6a95, 0x780d, 0x10c7, 0x7024, 0x3c99, 0xb5d1,
    0xb2b7, 0xef3d, 0xfb38, 0xb397, 0x774c, 0xf8cb, 0x7819, 0xcd60, 0x8c05, 0x55df, 0x2217, 0x2e62, 0x336b, 0xc44b, 0xe0b8, 0x6067,
    0xfe83, 0xb698, 0xf6ef, 0xf4de, 0x1146, 0x1942, 0x5305, 0xc57d, 0xc3af, 0x3918, 0xfef5, 0xf4a6, 0x3ec0, 0x6b70, 0xc9df, 0x0dc5,
    0xefec, 0x4241, 0x2023, 0xeedf, 0x74cf, 0xc3f4, 0x9a57, 0x6d3c, 0x651f, 0x793f, 0xb37d, 0x61ac, 0x11fa, 0x5982, 0xa634, 0x8a1a,
    0x99a4, 0x92fe, 0x6ef1, 0xae7a, 0xa5f6, 0xb753, 0x8ad3, 0x9936, 0x51c9, 0x9bd1, 0x4418, 0x213d, 0xa077, 0x0698, 0x331e, 0x23d1,
    0x7a9a, 0x1f35, 0x5caf, 0x2975, 0xf0e8, 0xb638, 0x2ceb, 0xffba, 0xa16a, 0x7191, 0xc422, 0x3554, 0x6465, 0x581f, 0x5099, 0x8c8f,
    0x8a53, 0x95e0, 0x8d16, 0xf1d7, 0x06b6, 0x18a3, 0xf2be, 0x81a3, 0xc2ef, 0xca67, 0x469e, 0xa9ef, 0x40d6, 0x66ec, 0xb5aa, 0xc28f,
    0x6b7f, 0x424b, 0x7d1c, 0xfeb9, 0xc971, 0xa39f, 0x4d25, 0x0c1f, 0xe60d, 0xbda0, 0x01e0, 0xb2b0, 0xa06f, 0xedcc, 0x7b27, 0xe8d8,
    0xb718, 0x2344, 0x8273, 0x44b0, 0xacca, 0x4310, 0x0522, 0x17f5, 0x4b9e, 0xa1fe, 0x17b2, 0xa1ba, 0xb525, 0x9d3b, 0x2d7a, 0xfeb2,
    0x844e, 0xa192, 0x552f, 0x87a7, 0x7e5a, 0xd9cd, 0x8bbb, 0xcdcf, 0x1e79, 0x7acd, 0xa3c3, 0xe2d8, 0xdb90, 0x4079, 0x934a, 0x5725,
    0x3f0a, 0xaad6, 0x5a33, 0x046f, 0x5c1e, 0x6678, 0xe95a, 0x1611, 0xbcc6, 0x0f5c, 0xfc4c, 0xea8d, 0xe0df, 0xd701, 0x93c2, 0xd642,
    0x80e9, 0xb8de, 0x6575, 0x27ec, 0xb900, 0xe4f1, 0x168e, 0x3e62, 0x674e, 0xeef7, 0x41cb, 0x8a59, 0x00c9, 0x9765, 0x79a3, 0x7b9a,
    0x4d35, 0xa0d2, 0xcecb, 0x3083, 0x9308, 0x3cf9, 0x8651, 0x4962, 0xb973, 0x07b4, 0xb2f1, 0x1ced, 0xd0e1, 0x4531, 0x70eb, 0x60ed,
    0x2545, 0x0131, 0x44b7, 0x9357, 0x30b0, 0x1f33, 0x57e4, 0x3a9e, 0x070f, 0x5575, 0x9e41, 0xef47, 0x12a7, 0x9347, 0x5960, 0x827f,
    0x964f, 0xe463, 0x03a1, 0x5c1f, 0x38ab, 0x76de, 0xafb5, 0xeb57, 0x2a5c, 0xa98a, 0x1e45, 0xde00, 0x2968, 0x8f86, 0x9fab, 0x6908,
    0x38ad, 0x6993, 0xae24, 0x71b2, 0x9012, 0xd97a, 0xe252, 0x45c3, 0x31e3, 0x3d12, 0xca7a, 0x615c, 0xa306, 0x84f7, 0xe1f3, 0xfaad,
    0x4a09, 0x4774, 0x4cf7, 0x3f4c, 0x27a5, 0x1e6d, 0x2021, 0x7eed, 0xd1ee, 0xe71e, 0xa11f, 0x2598, 0x77a8, 0x7054, 0x9735, 0x961e,
    0x9db7, 0xce2a, 0xc7cc, 0x0c2c, 0x9b1f, 0xf8ed, 0x8b69, 0x3fe8, 0xa40c, 0x0058, 0xb0d0, 0xfe1f, 0xe199, 0x7970, 0xeb0b, 0x42fa,
    0x2686, 0x36ec, 0xd94f, 0x42d2, 0x5d33, 0x4f6d, 0x2a4d, 0x955c, 0xe7ea, 0x1a42, 0x1658, 0xe09f, 0x22e6, 0x7221, 0xb6a2, 0x363b,
    0xdafe, 0x0d98, 0xdeef, 0x9100, 0x63e8, 0xa84e, 0x79df, 0xd374, 0xdec9, 0x3a36, 0x8b5e, 0xbfac, 0xd187, 0x4675, 0x8901, 0x0868,
    0xe8e7, 0x725c, 0x10c4, 0xab32, 0x6701, 0x879a, 0x4081, 0xe439, 0x1115, 0xb203, 0x4d73, 0xbffa, 0x8ce1, 0xd871, 0x8a3b, 0xebf7,
    0xffc8, 0xa43e, 0x6b37, 0xcddd, 0x7fff, 0x3ff6, 0x3aac, 0xabfc, 0x7fb1, 0xcd6e, 0x7bdd, 0xc86c, 0x8524, 0x9379, 0x5105, 0xb131,
    0xbe24, 0x9110, 0x1167, 0x02ff, 0x0887, 0xffec, 0xcc30, 0x9e07, 0xdca5, 0x5561, 0x02d7, 0x98b5, 0xa0a4, 0x31ff, 0xff7f, 0xf63f,
    0xaf4c, 0x0cdd, 0x0b31, 0x4284, 0xb5b2, 0xfaa2, 0x535c, 0x0d72, 0xd815, 0xab5c, 0x1c24, 0xf7c1, 0x9e05, 0x586d, 0x0ff2, 0x290d,
    0x53e4, 0x3ef2, 0xff50, 0xcf25, 0xe59c, 0x6bf3, 0xaf09, 0x5623, 0x2161, 0x0a37, 0xf613, 0xbab2, 0x8f27, 0x05c8, 0x31b7, 0x94d4,
    0xf558, 0xe6fc, 0x9e0d, 0x4c94, 0x9898, 0xbfbf, 0xe979, 0xb91d, 0x71ce, 0x41a8, 0xb1dc, 0x52f4, 0x69f4, 0x0796, 0xbfe6, 0x8294,
    0x5ae7, 0xd7f9, 0x04b5, 0x9097, 0x61bf, 0x6435, 0xe5a9, 0xbeb7, 0x72b5, 0xc07c, 0xf23b, 0xa8dd, 0xc7d8, 0xcc23, 0xbebe, 0x9494,
    0x9259, 0x0967, 0xf087, 0x66a9, 0xdcf1, 0x2b2e, 0x9961, 0x20f2, 0x4a5e, 0x90bf, 0xb9a9, 0x3b9f, 0x6316, 0xfe66, 0xe7f0, 0xd40c,
    0xa2dd, 0x68e3, 0xf5c8, 0x172a, 0x1bf0, 0x8dd4, 0x47ac, 0x0240, 0xc0cc, 0xd615, 0xc473, 0xc5fb, 0xaa92, 0xf257, 0x0d4d, 0x9647,
    0x5e5e, 0xe3e3, 0xb939, 0xbcb5, 0xac0a, 0x451b, 0xf18a, 0xb92b, 0x68cf, 0x4137, 0xba75, 0x4e9b, 0xe2d9, 0x284a, 0x56ae, 0x0f98,
    0x6d9a, 0x5bce, 0x77d7, 0xbb3b, 0xc610, 0x5370, 0x0fa5, 0xe1a4, 0x81d6, 0xf9da, 0xc9c9, 0xd9d9, 0x9539, 0x5963, 0xe72d, 0xcd36,
    0x5682, 0x4457, 0x93af, 0xee44, 0xa1d2, 0x10fc, 0xd2bc, 0x69e3, 0x2396, 0x5eeb, 0xb5d0, 0x9734, 0x9980, 0x97f7, 0x7c37, 0xe1bd,
    0x7fdc, 0x5afa, 0x6a6d, 0xe493, 0x4456, 0x7128, 0x05ca, 0x9751, 0xeb75, 0x2b51, 0x733a, 0xbf77, 0x7125, 0x8d93, 0x0376, 0x168b,
    0xe3b4, 0x593b, 0x6e7f, 0x4e8a, 0xe141, 0x3fa8, 0xd078, 0xe3d5, 0x21b1, 0x0b5a, 0x49c3, 0x4a1f, 0x25e4, 0x2d41, 0xaee4, 0x2bc6,
    0xee66, 0x5ec5, 0xc4a3, 0x206c, 0xe654, 0x8d65, 0x739c, 0x6a10, 0xad70, 0x8582, 0xb4e3, 0x3b59, 0xb4ab, 0xba31, 0xade5, 0xcdc9,
    0xc27b, 0x5183, 0x1e89, 0x98f1, 0x382a, 0x3bd4, 0x738f, 0x68f7, 0xa33a, 0xe8c3, 0x1d1b, 0xef64, 0xec38, 0xc670, 0xd901, 0x888a,
    0x6398, 0x2c72, 0x6839, 0x314b, 0x3812, 0x8863, 0x845d, 0x75d6, 0x2cc1, 0x08fd, 0xbc9f, 0xb28f, 0x034c, 0xd03b, 0xcde8, 0xa8e4,
    0x0808, 0x1b1b, 0x8abe, 0x9340, 0xe22a, 0xc87d, 0xf1cb, 0x68c1, 0x9607, 0xf469, 0x622d, 0x35bd, 0x8c4e, 0x78e9, 0x4dfa, 0xa068,
    0x3c42, 0x702f, 0xb7be, 0xa9e5, 0x7f92, 0xbfe3, 0x8f83, 0x4e59, 0xda29, 0x0b65, 0xb9b9, 0x6060, 0x829b, 0x8630, 0x3fd1, 0x6ab2,
    0x3bea, 0x6d08, 0x3277, 0x63de, 0x570e, 0x8c27, 0xc9a8, 0x8d47, 0x56f8, 0x47c8, 0x77e6, 0x59fe, 0xbd88, 0x3058, 0x60f5, 0x306c,
    0x1a0a, 0x1db3, 0x17de, 0x476a, 0x97af, 0x5dfe, 0xc70d, 0xb915, 0x3cbd, 0x353d, 0x24c5, 0xa7da, 0x033c, 0x4e26, 0xc77b, 0xdb46,
    0x6acc, 0x1bbc, 0x3bae, 0xb42b, 0x4b45, 0x7e1b, 0x9947, 0x4e8d, 0x079e, 0x30cc, 0x1929, 0xd6d3, 0xf89b, 0x22be, 0x2ccd, 0x968c,
    0x566f, 0x2408, 0x7993, 0x2485, 0xec5e, 0x5107, 0x22b6, 0xfedf, 0x0bb2, 0x6a16, 0xcc6a, 0xbc1b, 0xc954, 0x8053, 0x3f1d, 0xabae,
    0xe848, 0x6195, 0x7c90, 0x6030, 0x76d6, 0xd15d, 0x1d15, 0xe539, 0xfac3, 0xd72c, 0xc566, 0xd56c, 0x6fc9, 0xf96b, 0xa5f0, 0x725f,
    0x2cf6, 0xabf0, 0x5b7c, 0xc3ea, 0x2638, 0xc2f5, 0x8e3e, 0x5cff, 0x5b87, 0x6b07, 0x803f, 0x6bde, 0xf273, 0xf6a3, 0xb9dc, 0xda03,
    0xb071, 0x5d27, 0x5ba0, 0x9275, 0x00eb, 0x609b, 0x9a55, 0x56a0, 0xe0e3, 0x9653, 0x7750, 0x7577, 0x6c20, 0xa3c4, 0x9450, 0xb3c5,
    0x22a9, 0x67e6, 0x3a5e, 0x13a3, 0xa014, 0xf1f5, 0x5a0b, 0xb121, 0x32e8, 0x3a4f, 0xb40e, 0xd7ce, 0x7703, 0x9a3d, 0xeb00, 0x9b60,
    0x7129, 0xa2e1, 0x5712, 0x38d9, 0x9010, 0xbf76, 0xa67b, 0x1fa6, 0xbcef, 0x69ba, 0xef77, 0x4880, 0xa040, 0xf21c, 0x0862, 0x5599,
    0x436d, 0x881b, 0xd3b1, 0x06f2, 0x84d1, 0xb636, 0xa9a6, 0x541a, 0xcd2b, 0x369e, 0x9011, 0xf76f, 0xc569, 0x4c9b, 0xb778, 0x573d,
    0x893a, 0xdd2e, 0xd41d, 0x5ddd, 0x9d9d, 0x9c9c, 0xf507, 0x283c, 0x0a50, 0xfaf8, 0xc1b3, 0x9289, 0x3741, 0xcf68, 0x7512, 0x5dba,
    0x182d, 0x397e, 0x3377, 0x62af, 0x368a, 0x1558, 0x3bbb, 0xd777, 0xf999, 0xaa48, 0x3add, 0x4da7, 0x0e36, 0xa4eb, 0x3e3e, 0xe5e5,
    0x957d, 0x46de, 0x34c0, 0x03bd, 0x4cde, 0xc2cd, 0xdc0e, 0x420e, 0x38d5, 0x594b, 0x03fe, 0xf75c, 0x6daf, 0xac87, 0x377a, 0xc312,
    0x19d7, 0xa681, 0x24fb, 0x7d02, 0xf641, 0x58ac, 0xe3a8, 0x8319, 0x38f7, 0x8f76, 0xe857, 0xc7a3, 0x5f3c, 0xb6e7, 0x1984, 0x5e76,
    0x3d5f, 0xb0ab, 0x188e, 0xc806, 0x9006, 0x75a9, 0x26c5, 0x952b, 0xc5b9, 0x7544, 0x55b6, 0xae0c, 0xe9c5, 0x9f2e, 0xf5a3, 0xb3a4,
    0xecf8, 0x4b77, 0xacbb, 0x731d, 0xa677, 0xba99, 0x2bf7, 0x0a7a, 0x2e1b, 0xd7df, 0x71c6, 0x2ed4, 0xa89f, 0x1b4d, 0x0f71, 0x79fb,
    0x4831, 0x5b19, 0x61a1, 0xfc3f, 0x4df0, 0x1353, 0x4819, 0x00b0, 0x04ee, 0xc4b2, 0xf65b, 0xba8e, 0xf148, 0x001f, 0xe479, 0x35eb,
    0x22ee, 0xa540, 0xd617, 0x85f4, 0xbc11, 0xcd68, 0xc333, 0xf2e0, 0xb1d9, 0xb515, 0xb198, 0xa987, 0xe6d2, 0x812c, 0x545d, 0x54d1,
    0x5ce5, 0xf7d0, 0x42b0, 0x7db6, 0x638e, 0x6f43, 0x0649, 0xcd28, 0xbf42, 0x1e3d, 0x4691, 0x3a80, 0xada4, 0x815e, 0x7b4a, 0x4748,
    0xbb28, 0x870a, 0xb01b, 0x58b4, 0x10f2, 0xccd3, 0xd909, 0x7c27, 0xa017, 0xb04b, 0x3e73, 0xb047, 0x1faa, 0xd570, 0x94d8, 0x314f,
    0x8098, 0x92a2, 0x8f99, 0x1858, 0xf231, 0xcb27, 0x3b6f, 0x9c55, 0x6715, 0xcedb, 0xfc76, 0xcd8f, 0x1b76, 0x1343, 0xa7b6, 0xae99,
    0x86dd, 0xc4d0, 0x16d3, 0x7fd0, 0xb127, 0x027b, 0x363f, 0xf1db, 0xf79e, 0xd95b, 0xfc65, 0x3ba6, 0x5b4c, 0xff41, 0x0ca1, 0x08a3,
    0xcd8a, 0xd9aa, 0x4cbf, 0x27e0, 0xf22c, 0x5dfc, 0x4c44, 0xc9bb, 0x0276, 0x9e40, 0x0ac6, 0x8c92, 0xfc60, 0x4f1f, 0x7ace, 0x292b,
    0x7c22, 0xaa57, 0x42ea, 0x4a60, 0xa012, 0x1864, 0x536f, 0xa013, 0x1e38, 0x4bbd, 0x1a52, 0xe41f, 0x0644, 0x2986, 0xa57f, 0x1400,
    0x7318, 0xa963, 0xd0ce, 0x05cb, 0xa89a, 0xcfe8, 0x6ae9, 0x023e, 0x9f29, 0xbf0b, 0xe817, 0x1b33, 0x1889, 0x0f82, 0x0fcb, 0x8bdf,
    0x35e6, 0xe07a, 0xbd72, 0xd4a5, 0x482c, 0xe903, 0x739a, 0xcca1, 0xa53b, 0x1fa7, 0x78d1, 0xc93b, 0x5458, 0x1378, 0x6684, 0xc5d2,
    0xe41a, 0xb8a6, 0xb67e, 0x1452, 0xa00d, 0x980c, 0xc11e, 0xf9cc, 0x5df7, 0x9ec6, 0x5e23, 0x0150, 0x0ac1, 0xf6d9, 0xcc18, 0x471d,
    0x0239, 0xe178, 0xa0bc, 0x2b7d, 0x9f24, 0x6b53, 0xc12e, 0x805e, 0x1fa2, 0x2fb1, 0x20f9, 0x60c0, 0x7395, 0xdf43, 0x5e87, 0xbdab,
    0xc016, 0x223d, 0xc8a3, 0xc01b, 0xb00f, 0xdc1a, 0x123b, 0x30fb, 0x645a, 0x839c, 0xaf2b, 0xe0d0, 0xb014, 0xb581, 0xdd8c, 0x1ac8,
    0xbda6, 0x164b, 0xb019, 0xc01d, 0x0234, 0xb7b8, 0x96df, 0x0c68, 0xb8a1, 0x3bf9, 0xd5bb, 0x2890, 0xcc13, 0x645f, 0x5833, 0x065e,
    0x52ef, 0x078e, 0x2790, 0x809d, 0x9893, 0xa593, 0xd176, 0x6d8c, 0x6430, 0x211b, 0xc8d0, 0x1f16, 0xf236, 0xecab, 0xaaf3, 0x3e6f,
    0x023b, 0x51ea, 0x1b7b, 0xfe30, 0xc0c7, 0x2bea, 0xe087, 0x950e, 0x90ba, 0x1298, 0xd32f, 0x09f8, 0x995c, 0x671a, 0xce46, 0x3ce3,
    0xcf20, 0xf7a3, 0x2cb0, 0xc13f, 0x8f22, 0x6f00, 0xcfd5, 0x3484, 0x5868, 0xff0f, 0xf585, 0x217d, 0x0b2c, 0xf04f, 0x5b51, 0x9b1d,
    0xb12c, 0x813b, 0x6d45, 0x6c76, 0xffc3, 0x161a, 0x45cc, 0xe442, 0x910b, 0x1731, 0x705c, 0xb033, 0xff7a, 0x7a53, 0xe4ef, 0x86e2,
    0xbf72, 0xa7a0, 0x50be, 0xf82d, 0x4451, 0x13db, 0x94c3, 0xbb2d, 0x10f7, 0xb79f, 0xe4c1, 0xb0ec, 0xb5cb, 0x9e68, 0x7475, 0x50a6,
    0xb926, 0x9e10, 0x6900, 0x975a, 0x68ca, 0xfee8, 0x1faf, 0x8322, 0xf9d5, 0xa01c, 0x9c5e, 0xf2e9, 0x0fa0, 0x7eb1, 0x348d, 0x9ee3,
    0x4e85, 0xdea4, 0xb29f, 0x85a4, 0x25df, 0xbf47, 0x4d0c, 0x6dd8, 0xba2c, 0xccf2, 0xada9, 0xa346, 0xc49e, 0x09ec, 0x5ac2, 0xfee5,
    0xa8df, 0xca04, 0x549a, 0x2ab9, 0x6393, 0x8f1c, 0xba66, 0x9eda, 0x517e, 0x4d38, 0xa720, 0x5cea, 0xd8fc, 0xc76f, 0xcf41, 0x56e2,
    0x487b, 0x100e, 0x391b, 0xf38c, 0x900b, 0x4f1e, 0x944f, 0x0f97, 0xb631, 0x45db, 0x7b6d, 0x3d64, 0x900c, 0x5976, 0x880a, 0x1e7a,
    0xb11c, 0x5af7, 0x6572, 0x9c69, 0x32e3, 0xc5be, 0x1865, 0x2496, 0x964e, 0x624e, 0xe9ca, 0x0561, 0x9a50, 0xb212, 0x0eb7, 0x0ed6,
    0x62aa, 0x970a, 0x9752, 0xcaf5, 0x0e31, 0xf1ad, 0xa8a4, 0x2620, 0xcf63, 0x2e20, 0xf75f, 0x9d65, 0xd418, 0xcfc0, 0xc121, 0x2999,
    0xc30d, 0xb8a8, 0x0450, 0xd302, 0x9578, 0x54cb, 0xfba6, 0xecfd, 0xa67c, 0x2efc, 0x2dd1, 0xd5e4, 0x197f, 0xe98e, 0xb225, 0x4d9c,
    0xbc16, 0xf47f, 0xf6c5, 0xb043, 0xec59, 0xe157, 0xc53c, 0x5362, 0x7e16, 0x4a76, 0x371b, 0x599c, 0x1924, 0x34a3, 0x6fa2, 0x22f3,
    0xe534, 0xb1de, 0x23e5, 0xd3f4, 0xfabe, 0xca2d, 0x55c3, 0x7ea8, 0x6b02, 0x9826, 0x29ff, 0x9189, 0x8e39, 0xbd0d, 0xe6d7, 0x39cb,
    0x63d9, 0x2302, 0xf14d, 0xbc66, 0xbd83, 0xb60a, 0xcea9, 0x6559, 0x4e21, 0x3356, 0x8e2d, 0x3a3c, 0x17d9, 0x04f3, 0xb428, 0xea21,
    0x6aad, 0xa3f0, 0x2248, 0x4836, 0x3c3d, 0x7aa9, 0x8ec4, 0x3ecc, 0x1b16, 0x61ef, 0x8f6a, 0xa6ca, 0x4df5, 0x8fd1, 0xe74a, 0xe327,
    0x220b, 0x70e4, 0x0c51, 0xc81e, 0x8004, 0x588f, 0xfc03, 0x4448, 0x311a, 0x0139, 0x20ba, 0xffcd, 0xff8f, 0x3634, 0x65a7, 0xf5d3,
    0x16c3, 0xe263, 0x1cd3, 0x30a8, 0x2914, 0x7fb6, 0xdefb, 0x4647, 0xee0e, 0xace6, 0x8529, 0x4f9a, 0x0007, 0x436a, 0xbc2f, 0xd48e,
    0x0e09, 0xc94c, 0xaa3d, 0x2a9b, 0xa62a, 0xa970, 0xa0a9, 0xddc9, 0x2298, 0xdcaa, 0x08ed, 0xe4db, 0x2d5d, 0xc047, 0x9514, 0x04c4,
    0x543b, 0xfa95, 0xb804, 0x7d9f, 0x7803, 0x7914, 0xd78c, 0xbe29, 0x088c, 0x658f, 0x5d79, 0x8706, 0x496f, 0x9f30, 0x12dd, 0x4d5e,
    0xe5a1, 0x2d88, 0x70f9, 0xf944, 0x8a49, 0xb54f, 0x3528, 0x9743, 0x332c, 0x441e, 0xa3a2, 0x3ca7, 0xfece, 0x2414, 0xd858, 0x53e9,
    0x8850, 0x2166, 0xcc7b, 0xe64e, 0xd9c3, 0xa6f3, 0x4184, 0x13d2, 0x2b21, 0x09a5, 0x94f7, 0x2211, 0x5247, 0xf18c, 0x8f2c, 0x9a1a,
    0x0ebf, 0xe460, 0x9e0a, 0xcbc8, 0xa115, 0x5e04, 0x705f, 0xa6be, 0x45b4, 0xe6af, 0xbcf7, 0xcade, 0x8c62, 0xd81a, 0xfb03, 0xe49b,
    0xfbd7, 0xd29b, 0xda82, 0xaf51, 0x085e, 0x0c8b, 0x6542, 0x3e32, 0x763c, 0xd094, 0xce5e, 0xece3, 0xb5b7, 0x9172, 0x0925, 0x83ed,
    0x07f0, 0x7bcd, 0x42a8, 0x925e, 0x8571, 0x29eb, 0x3b75, 0x6a5f, 0x5726, 0xc699, 0x3bc7, 0xf38d, 0xdcf6, 0xe78b, 0x33dd, 0xfd30,
    0xba17, 0x42eb, 0x631b, 0x5db4, 0xf448, 0xc78c, 0x6ebd, 0x6a25, 0x9cb9, 0xb77b, 0x9a92, 0x36e6, 0xa8a1, 0x4a63, 0x2825, 0x1dd1,
    0x795f, 0xc0d1, 0x468b, 0xf8eb, 0x9675, 0x7fdd, 0xae57, 0x94ba, 0x74ad, 0x8b08, 0xad19, 0x8237, 0xc5dd, 0xe6e7, 0xaa97, 0xc3d3,
    0x1bf5, 0x4099, 0xb8fe, 0x7d38, 0xa21e, 0x428b, 0x1197, 0x18c3, 0x5595, 0x35a6, 0xfa77, 0xd99a, 0xd987, 0xd891, 0x370c, 0xa2e2,
    0xcdf6, 0x86b1, 0x1ed2, 0x0384, 0xc411, 0x31c5, 0x0d5b, 0x5aec, 0x61c4, 0xc789, 0xb9ea, 0xbbc5, 0x1992, 0x989e, 0x7b8f, 0xb786,
    0x947d, 0xe4fd, 0xcf4f, 0xee82, 0xe758, 0x019f, 0xc7dd, 0xb233, 0x5841, 0x72ba, 0x4bfa, 0x6692, 0x1e19, 0x546b, 0x0caf, 0xecdb,
    0xff6e, 0xef4d, 0x7a69, 0x10ef, 0x52a3, 0x71d3, 0xbdbc, 0x1d3e, 0x31ac, 0x0d12, 0x69f9, 0x3767, 0xbaee, 0x273e, 0xc57c, 0x2a4c,
    0x0b59, 0x0a4f, 0x014f, 0x371a, 0x989d, 0x12eb, 0x0933, 0xbb24, 0x1039, 0x5f9f, 0x58c0, 0xf55d, 0xe1a6, 0x15dc, 0x0b4b, 0x7138,
    0xd477, 0x10da, 0x7661, 0xdb06, 0xad7c, 0x21b6, 0x2145, 0xeb67, 0x0129, 0x97ad, 0x25e9, 0x2a84, 0x5552, 0xfe4a, 0x7e4e, 0x7ed4,
    0x77bb, 0xcb99, 0x7359, 0x61e9, 0xe146, 0x242c, 0xa6a7, 0xa797, 0xf1f3, 0x03cd, 0x5c56, 0xe3b9, 0x12fb, 0x21fa, 0xf01c, 0xa1d4,
    0xf218, 0x3521, 0xaa8c, 0x28e6, 0x3e1a, 0xa5a0, 0x143f, 0xee6b, 0xe659, 0xe116, 0x6fad, 0x47aa, 0x2a35, 0x1d37, 0xc2c0, 0x7ccc,
    0x5d50, 0x8220, 0x5eff, 0x3604, 0xa421, 0x7eae, 0xb4b0, 0x1387, 0xca9e, 0xad75, 0x6a0e, 0xa744, 0xf4eb, 0xc262, 0x5f91, 0xea78,
    0xcdfc, 0x2cc6, 0x43fa, 0xae7d, 0x3dee, 0x1ade, 0x32d3, 0xbf69, 0xb17c, 0xeb8b, 0x8bdc, 0x0286, 0xd320, 0xc30b, 0x0351, 0xfb6f,
    0x3817, 0xdf11, 0x9215, 0x9489, 0x7f63, 0x97f0, 0x562a, 0xed57, 0xc433, 0x851d, 0xf0ad, 0x908f, 0x51e8, 0x131a, 0x7c06, 0x639d,
    0xfb00, 0xadc1, 0x96b4, 0xc280, 0x5aa6, 0xc4ab, 0x4b17, 0x119a, 0x0a8b, 0x026f, 0xe32f, 0xdd31, 0x382f, 0x88cc, 0x7843, 0xb017,
    0x277f, 0x3714, 0xec3d, 0xc362, 0x7ebd, 0x508e, 0xead4, 0x96cb, 0x519f, 0x5adb, 0x3583, 0xe065, 0x6aa2, 0xa33f, 0x58b2, 0x35ed,
    0x4ee7, 0x496d, 0x9985, 0x5270, 0xeab7, 0x87cf, 0x0326, 0x0368, 0xa196, 0x934b, 0x391c, 0x82c8, 0x6ea1, 0x239b, 0x8084, 0xfbb5,
    0x4a61, 0xe693, 0xc503, 0x5687, 0x13de, 0x8c1a, 0xa513, 0xb26e, 0x1206, 0xcd20, 0x4953, 0x07c3, 0xa1d7, 0x6aef, 0x9e94, 0x79b4,
    0x445b, 0xfe6a, 0x3541, 0x58b0, 0x5afb, 0x7eb5, 0x7548, 0x9810, 0x81fb, 0xfd17, 0x44cf, 0xb252, 0x8182, 0xc266, 0xe6b3, 0x7fe1,
    0x8b28, 0xeb7a, 0xb654, 0x2a0b, 0xd6d0, 0x548b, 0x0a6f, 0xf824, 0xfc4f, 0xd83a, 0x2da8, 0x1af5, 0xad06, 0xc246, 0x712a, 0x7934,
    0x98d2, 0x286a, 0x4477, 0x94a0, 0x091d, 0x32ac, 0x953e, 0x8d85, 0x41c8, 0x81db, 0x64da, 0x2b4e, 0x12ec, 0x05e8, 0x9130, 0xd235,
    0x47e8, 0x6609, 0x75f2, 0xc89d, 0x2714, 0x8073, 0xac10, 0x6d9f, 0xc615, 0xaca7, 0xdd4e, 0x97da, 0x3a6f, 0x3d9c, 0x545f, 0xb656,
    0x3376, 0x206b, 0xe533, 0xe177, 0xac0f, 0xb232, 0xb8c8, 0x50b5, 0xeb80, 0xf06f, 0x07ae, 0x5e63, 0xa03c, 0x6dc8, 0xbd66, 0x8f3c,
    0xb331, 0x817e, 0x92c2, 0x2554, 0xb535, 0x68d4, 0x454a, 0xbab9, 0x9e60, 0xfb22, 0xe2de, 0xd008, 0xd150, 0x647f, 0xe198, 0xc44a,
    0x73ef, 0xd462, 0xe946, 0xe18e, 0x344a, 0x9ce8, 0x7708, 0x9972, 0xed32, 0x32ed, 0x6d3a, 0xd6e9, 0xab26, 0xfd13, 0xabc7, 0xf1a0,
    0x69b6, 0x396f, 0x48b2, 0xb248, 0x40b7, 0xeb24, 0x87dc, 0x22ae, 0xa019, 0x2716, 0x848b, 0xb30d, 0x9799, 0x87af, 0x37ac, 0x6eb0,
    0x0bd9, 0x50dd, 0x16bd, 0x7f59, 0x00f0, 0x5958, 0xbd93, 0x746c, 0xd978, 0x8e76, 0xb875, 0xb076, 0xa0e5, 0xc52c, 0xbcd1, 0x3dcd,
    0xc907, 0x0306, 0x1203, 0x10d0, 0x646e, 0xe0e8, 0xa30f, 0x8cea, 0xe515, 0xf0e6, 0x6c25, 0x54ef, 0x8e61, 0xb1c8, 0x2730, 0xeb97,
    0xd329, 0x1304, 0xa045, 0xad0f, 0xff98, 0x5250, 0xc5e6, 0xe1af, 0x2e71, 0x41ec, 0x5c78, 0xe051, 0x8edc, 0xbcf4, 0xa0ee, 0xeeea,
    0x69fd, 0xa0ad, 0xec41, 0x712e, 0x8c57, 0xc95d, 0xa049, 0x5f45, 0x0aca, 0x064d, 0x1b7f, 0xe6db, 0x9015, 0x8e42, 0x0b35, 0xd905,
    0x84d6, 0xfcde, 0xbddf, 0x2201, 0xa91f, 0xb07e, 0xb5fd, 0x1b30, 0x1bc8, 0x4ec7, 0x214d, 0xb672, 0x8753, 0x4eed, 0x3e9d, 0x4372,
    0xd5e7, 0xcd30, 0xf3be, 0xa6e9, 0x0fa8, 0x26a0, 0xc7d0, 0x509d, 0x206e, 0x0db5, 0x99e7, 0x68eb, 0xeee1, 0x20ce, 0xc56e, 0xb2f7,
    0xb0a5, 0x38fc, 0x5f0f, 0x332f, 0x538c, 0x230d, 0x160a, 0xb5c2, 0xe05d, 0x100f, 0x407a, 0xacbe, 0x8ed3, 0x64ed, 0x5f41, 0xdb49,
    0xf646, 0xc9f3, 0xb560, 0x7c23, 0x4493, 0xbe5d, 0xed64, 0xd38e, 0xa20d, 0x9689, 0xbd26, 0x33b1, 0xb9fd, 0x3a29, 0x82bd, 0x19dc,
    0xdccb, 0x72fa, 0x4b8b, 0x9582, 0x4177, 0xa7e7, 0xe7ce, 0x6a6e, 0x78c2, 0xe570, 0x44fd, 0xda68, 0x4ce3, 0x932b, 0xa369, 0xf513,
    0xceaf, 0x00e5, 0x6db4, 0xbc77, 0xbf3a, 0x9403, 0xf402, 0x7609, 0x32ae, 0x1e3f, 0x24e3, 0x0c03, 0xb768, 0x38da, 0x3759, 0x89d2,
    0x6b48, 0x81f7, 0xcba0, 0xe93c, 0xb497, 0x0a55, 0xa453, 0x5edd, 0x749d, 0xc1c6, 0x3746, 0x7695, 0xeede, 0xdeee, 0xe8ab, 0x0934,
    0x065d, 0xe749, 0xd03a, 0x5f3b, 0x9da2, 0x50b6, 0x5f9e, 0x9e5f, 0x49d6, 0x6e81, 0x0e91, 0x893f, 0xbceb, 0x6ef3, 0x715c, 0x7dc2,
    0x3404, 0x80c4, 0x2a7e, 0x78b8, 0x3e7e, 0x79a0, 0x8d90, 0x1832, 0x368f, 0xd293, 0x7627, 0x372e, 0x759d, 0x1761, 0xad4b, 0x8034,
    0x9dc6, 0x53b5, 0x7f49, 0xd24c, 0x3d05, 0xfb95, 0x0e3b, 0x9c31, 0x913c, 0xf99e, 0x5e36, 0x9da3, 0xaf40, 0xd256, 0x319e, 0x48ea,
    0x561d, 0xfe55, 0x2ba4, 0x7c2d, 0x7f1b, 0xdbe6, 0x62e0, 0x5674, 0xec63, 0x11e6, 0x5245, 0xcccf, 0x247d, 0x59c9, 0x1532, 0x19b3,
    0xcb1a, 0xa9cc, 0x14ed, 0xb285, 0x1ca9, 0x4dcb, 0xc959, 0x7d24, 0xd343, 0x0bb7, 0xd71d, 0x15da, 0xe79c, 0x1a7f, 0x29d3, 0x0413,
    0xfc9e, 0x21bd, 0x9ae6, 0x7ff5, 0x4861, 0x07a3, 0x222a, 0x6407, 0xf01a, 0xd52a, 0xf8a0, 0x4f81, 0x1176, 0xd759, 0x1418, 0xa1ee,
    0x84ce, 0x044a, 0x1477, 0xd7ef, 0x4b4a, 0xc236, 0x19c3, 0xb0e3, 0x6ba3, 0x7932, 0x2c74, 0x6ad1, 0xe048, 0x218e, 0xef3f, 0x2570,
    0x869d, 0x9724, 0x8a08, 0xe84d, 0xef73, 0x62d4, 0xb4ce, 0xee36, 0x8dda, 0x23bf, 0x6374, 0x5769, 0x76db, 0xdb76, 0x49d4, 0xe976,
    0xd065, 0x9e74, 0x6fce, 0x558f, 0x6055, 0x28da, 0x3339, 0x3933, 0x06d1, 0x44cb, 0xfc67, 0x454c, 0x072a, 0xfac8, 0x8b84, 0x0db3,
    0x11a2, 0x5b8c, 0x2188, 0x5665, 0xa125, 0xb5bf, 0xd1cf, 0xe4b8, 0x5069, 0xa69a, 0x9e7c, 0x4984, 0x5c6f, 0xc074, 0xf278, 0x5c80,
    0x263d, 0xbe2c, 0x8102, 0xc873, 0x35c5, 0xd720, 0xce02, 0x0f35, 0xd8da, 0x1346, 0xe1d9, 0x4821, 0x0613, 0x6acf, 0x7a5b, 0x2cfb,
    0x97b4, 0x550a, 0xec5c, 0x26bb, 0xb0c0, 0x6a89, 0xe8c6, 0xd2ae, 0x487c, 0x7c48, 0x9e97, 0xdb91, 0x8507, 0xfea0, 0xbc7a, 0x1a0f,
    0x8c7d, 0x3cc2, 0xaa58, 0x58aa, 0x0b74, 0xb24e, 0x3727, 0xb796, 0x7f7e, 0xc37d, 0x5c71, 0xc27d, 0x41e3, 0x8f57, 0x0341, 0xfe85,
    0xcc2e, 0x60db, 0xbd8d, 0x187f, 0x80b3, 0xcd43, 0xe494, 0x755f, 0xec74, 0xbc81, 0x7b88, 0xcfdb, 0xf9f0, 0x56fd, 0xe0a2, 0x8156,
    0xe2f4, 0x974f, 0x6e9a, 0x3bef, 0xbe3f, 0x563e, 0xbed9, 0xd630, 0x84ec, 0x13be, 0xe872, 0xa506, 0x5713, 0xa083, 0x1d30, 0x1bd7,
    0xbd82, 0xdc19, 0xdc0d, 0x68f6, 0xe22f, 0x80c3, 0xe532, 0x10ee, 0x826d, 0x03ac, 0xf500, 0x080d, 0x2e68, 0xe673, 0xbb25, 0x1d01,
    0x2b6d, 0x19f4, 0xac03, 0x6d82, 0xb8c9, 0x960c, 0x9a9f, 0xca02, 0x5a81, 0x6956, 0x8c53, 0x0d23, 0x1114, 0x9bd0, 0xfa9b, 0x8b3f,
    0xe230, 0xc4e3, 0x3d58, 0x1b0c, 0x42e8, 0x846a, 0x82a0, 0x67b7, 0x8db1, 0xda2e, 0x72a5, 0xa4d8, 0x7096, 0x9925, 0xa95c, 0x3629,
    0xca17, 0xbf05, 0x0856, 0xcfb6, 0xc16f, 0x85f2, 0xbc5f, 0x3c47, 0x7f97, 0xebe5, 0x50b7, 0xcd91, 0x958c, 0x2ad2, 0x5295, 0x4339,
    0x8871, 0x6f8d, 0x96c8, 0x7136, 0xd223, 0x6c01, 0x8de2, 0x381c, 0x7f68, 0x5e0c, 0xc303, 0xb367, 0x58ba, 0x8cd0, 0x89b3, 0xb644,
    0x9aed, 0x1628, 0x8f2a, 0x394a, 0x7ab7, 0x0512, 0x51ed, 0x54d9, 0xb7c6, 0xc438, 0xb600, 0xe911, 0x0b14, 0xcd76, 0x0289, 0xbd5b,
    0xd748, 0xc244, 0xd72e, 0x79a2, 0x8600, 0xb181, 0x0f5e, 0x564c, 0xfba3, 0xa329, 0xd325, 0x9411, 0x25b6, 0xe0f6, 0x26ae, 0x0741,
    0x12f9, 0x785b, 0xd1d5, 0x4299, 0x3df3, 0x7922, 0x0c99, 0x5ce1, 0x0c8a, 0x7ebc, 0x509c, 0xce01, 0x68e2, 0x2cf5, 0x7fcf, 0x5499,
    0x2c50, 0x35db, 0xf14f, 0xfb05, 0x7294, 0x1e55, 0x93ee, 0x68e9, 0xaf69, 0xc592, 0xb005, 0x488f, 0x5aab, 0x28fc, 0x58f6, 0x88c0,
    0x0a24, 0xf56e, 0x3834, 0xebca, 0xa9b2, 0xa3da, 0x0e8f, 0x638b, 0x1246, 0x2a15, 0xe070, 0x378a, 0xfb5d, 0x0a90, 0x1049, 0x8dce,
    0x0ea0, 0x51a4, 0xec11, 0xcf9c, 0x2c3b, 0x7930, 0x7cba, 0xa717, 0xf2c8, 0xa1a9, 0x7b40, 0x973b, 0x99de, 0xea66, 0x6aa7, 0x8d3b,
    0x7ec2, 0x5756, 0xa498, 0x54fb, 0x7f7c, 0x7cac, 0xce92, 0xd68f, 0x5739, 0x3df4, 0x2eca, 0xa1c2, 0xafdc, 0x29e8, 0xae49, 0x2784,
    0xa426, 0x431e, 0x3d07, 0x5b89, 0x87a8, 0xa2d0, 0x0171, 0x1e7b, 0xb761, 0x3431, 0xda1f, 0x8317, 0xa90e, 0x0213, 0xc3c1, 0x5d55,
    0x528e, 0xcaa3, 0x63f3, 0x1dbf, 0x07d7, 0xe840, 0x1de2, 0x4d2f, 0xfd1e, 0x977c, 0x22b4, 0xc08b, 0x0dac, 0xa580, 0xf4f0, 0xa5ea,
    0x357c, 0x82f8, 0x2a3a, 0x73ca, 0x2cb6, 0x16a5, 0x527a, 0xd1e6, 0x7e2b, 0x7126, 0xd3a7, 0x6e48, 0x97d3, 0xe65e, 0xe0ca, 0x5b65,
    0xf029, 0x141f, 0xc6f6, 0xf21d, 0xb774, 0xcf8e, 0x2354, 0x1742, 0x0885, 0x6216, 0x4204, 0x159e, 0x3e1f, 0xdfaa, 0xf8dd, 0xecc9,
    0xf5c1, 0x103a, 0x052c, 0x606d, 0xad81, 0x28c6, 0x5345, 0x5175, 0x44c3, 0x0e5e, 0x69ea, 0xd47c, 0x2065, 0x02c0, 0xa608, 0x2ab7,
    0xbea7, 0x791a, 0x076f, 0x9867, 0x67df, 0x012e, 0x04b2, 0x9b4b, 0x1a03, 0xb7e5, 0x5557, 0xf070, 0x37c1, 0x4d4c, 0x23e3, 0x2654,
    0x9ab8, 0x1d04, 0x83ef, 0x4838, 0x2be3, 0x7a6c, 0x1300, 0x9a08, 0x9571, 0xf1f8, 0x7385, 0x3264, 0x53d7, 0xa53e, 0x2035, 0x080e,
    0x96d8, 0x83db, 0xac64, 0x5691, 0xb9a1, 0x0e92, 0x7430, 0x77c0, 0xe14b, 0xbee4, 0xe489, 0xf7cc, 0x7c20, 0xa919, 0x7951, 0x6bb3,
    0xbc18, 0xfed0, 0x083b, 0x800c, 0x66cf, 0x8607, 0xa1dc, 0xa32c, 0xfa40, 0x120b, 0x33fa, 0xaa26, 0xd532, 0x255e, 0x7c6b, 0x438c,
    0x19a1, 0xb174, 0xc3f2, 0xe2f7, 0x6c89, 0x1367, 0x7048, 0x4a66, 0x13e3, 0x3ead, 0x93f9, 0x0401, 0x518e, 0x94e0, 0x061e, 0xf9cf,
    0xfd68, 0x2ce9, 0x43dc, 0xde7e, 0xeabc, 0xcf9b, 0xb391, 0xcf38, 0x7842, 0xe49a, 0x5c6e, 0x4eec, 0xc565, 0x3b9e, 0xba2b, 0xceda,
    0x45c1, 0xad02, 0x9307, 0xc3b2, 0x95e9, 0xa19b, 0x477d, 0x0da1, 0x5d6a, 0xa401, 0x6ea6, 0xe99d, 0xe964, 0xe624, 0x8afa, 0xf031,
    0xdf1a, 0x10e3, 0x8187, 0xfe73, 0xe26c, 0x2d91, 0x40a2, 0xef56, 0x19fd, 0x5513, 0xbe35, 0x21c6, 0xc9fc, 0x8200, 0x030f, 0xfce7,
    0xd802, 0xa447, 0x2c7b, 0x4460, 0x7038, 0x1bc5, 0x8824, 0x46e7, 0xe181, 0xd9b3, 0xc4d9, 0x5b22, 0x5b00, 0xf488, 0x8144, 0xdead,
    0xd6d5, 0x5edf, 0xeabd, 0x7db2, 0x1cef, 0x37ce, 0xd511, 0x16e7, 0x634b, 0x8bc5, 0x29c9, 0xbeea, 0xb3e3, 0x2ddd, 0x45a9, 0x8b2d,
    0x70f1, 0xfc54, 0x3617, 0x10ab, 0x7e37, 0x7b32, 0xb832, 0x56d9, 0x7923, 0x4327, 0x575f, 0xc24d, 0xb2ee, 0xcc75, 0xad0b, 0x5ee8,
    0x6e11, 0x9e65, 0x9c82, 0x73a9, 0xdc57, 0x5530, 0x880b, 0xd8f3, 0x1692, 0xca7e, 0x3322, 0x0bce, 0xeed8, 0x1c01, 0xd155, 0x3a00,
    0xb53a, 0xb2e5, 0x45f9, 0x34e1, 0x698c, 0x195a, 0x865b, 0x14d6, 0x7a93, 0x3a15, 0x4360, 0xf5ef, 0x1401, 0xc0b4, 0xbc44, 0xb336,
    0xf18e, 0xb1e0, 0x3fd5, 0x337b, 0xfbaa, 0xa724, 0xe47d, 0xc8a7, 0x8d94, 0xb879, 0x7a5f, 0x6e9e, 0xac14, 0x5c5a, 0xd85c, 0x42ac,
    0xfa84, 0x2e3d, 0xa041, 0x074d, 0x2f16, 0x8d2d, 0x3dbb, 0x1504, 0xe6c3, 0x3c2c, 0x18b9, 0x3d41, 0x704c, 0xeb85, 0xc3c5, 0xf153,
    0x5fa0, 0xcc6c, 0x8022, 0x1698, 0xe894, 0x41cd, 0xa61e, 0xc662, 0xa0d5, 0x48d8, 0x12f1, 0xdacc, 0x8685, 0xf0ff, 0x8020, 0x7f32,
    0xc154, 0x5f71, 0xf3eb, 0x0722, 0x0922, 0xb9d1, 0xd456, 0xc766, 0xfcb6, 0x4063, 0xeb81, 0x98d7, 0x20c5, 0x6c65, 0x24a1, 0x7db0,
    0x4c97, 0x5046, 0x499a, 0xe92f, 0x5ac5, 0x89c0, 0xe7e4, 0x47ed, 0x2719, 0x6018, 0x0a65, 0x4757, 0xa424, 0x0ae4, 0xf501, 0xd404,
    0xee8f, 0x8ca6, 0x94aa, 0x19ca, 0x8940, 0x99d0, 0x3a74, 0x85d7, 0xdb37, 0xc61a, 0xe16d, 0x4be4, 0x6e14, 0xc242, 0xc5cf, 0x89b0,
    0xb11f, 0xfc4b, 0x8fbb, 0x6467, 0x8d96, 0x61c9, 0xceb1, 0x033e, 0x64dd, 0x4a27, 0x1997, 0xf62d, 0x1835, 0x27bc, 0xdb10, 0xbe56,
    0xc811, 0xc70b, 0x9e9f, 0xdd05, 0xc416, 0xd0f2, 0x28fb, 0xc9fb, 0xad0e, 0x8a07, 0x2d87, 0xcdfb, 0xcd27, 0x94c2, 0xbfbe, 0x4b44,
    0x9b96, 0x3952, 0x8d63, 0xda13, 0xfa48, 0x92b3, 0xe6bf, 0x9482, 0xe75d, 0x779b, 0x18af, 0x92bb, 0x8282, 0xabab, 0x4093, 0xbe8a,
    0x5399, 0x9635, 0xfbf3, 0x1bee, 0x650b, 0x29da, 0x1e1e, 0xdbdb, 0x8fe0, 0x5846, 0xd3fa, 0x415b, 0xbf61, 0x3564, 0xd883, 0xe25c,
    0x8cd4, 0x103e, 0x195e, 0xd9b7, 0xfe2e, 0x1679, 0x3c32, 0xa8d6, 0xf368, 0x3d29, 0x728a, 0xbc98, 0xd5de, 0x43af, 0xe1ab, 0xc417,
    0x98a2, 0x70e8, 0x97f4, 0xcd24, 0x2ad6, 0x044e, 0xb082, 0xe574, 0x0f86, 0x92a6, 0x161e, 0x61f3, 0x9a41, 0x240c, 0x3ffa, 0x0b5e,
    0x34fe, 0xcf39, 0x8878, 0xff73, 0x0826, 0x53a6, 0x8708, 0xecff, 0x0989, 0xa8d2, 0x202b, 0x1c85, 0x52a8, 0xa4bd, 0x166a, 0xb20b,
    0x176e, 0xa687, 0xbaf3, 0xa97b, 0x2bb4, 0xae3b, 0xa852, 0xbda4, 0x8750, 0xf937, 0x1594, 0x0c9a, 0x0551, 0x31b1, 0x36fe, 0xcdb7,
    0x96ee, 0xd9f1, 0xc5e2, 0xb1a5, 0xe63a, 0x5977, 0xa193, 0xbc91, 0x1dcf, 0xe2b2, 0x724d, 0x3c21, 0x7312, 0x74b2, 0xd200, 0x2eb5,
    0x7533, 0x4cef, 0xd0d4, 0x7964, 0x14f4, 0x57ee, 0x1efa, 0xab9c, 0x707b, 0x12db, 0xd194, 0xfdd1, 0x967a, 0x3471, 0x3f5e, 0x0645,
    0xa223, 0x10a2, 0x66ee, 0xc55e, 0x28f0, 0x3c2e, 0x305a, 0x72fc, 0x7677, 0xefae, 0x3d9a, 0x0377, 0xb79c, 0xdb34, 0xe205, 0x1bfa,
    0xa056, 0x559a, 0x7776, 0xaeef, 0x097d, 0xa1b4, 0x6d14, 0x2ab0, 0xc349, 0x1f4a, 0x3133, 0x6aa0, 0xa6e0, 0x8c21, 0xd98c, 0x990a,
    0xafbf, 0x5c36, 0x9251, 0x58c1, 0x5da8, 0xe38c, 0xa8a6, 0x08ef, 0xf732, 0x9cbe, 0xf3ab, 0x4039, 0xb30b, 0xd836, 0x38bd, 0xe5d3,
    0x369a, 0x513f, 0xc300, 0xc938, 0xf3f6, 0x1ee2, 0xa941, 0xba1c, 0xf44d, 0x5e64, 0x1f40, 0xfd62, 0x4944, 0x24e1, 0x691a, 0x3dc7,
    0x6cc3, 0xe122, 0x75ba, 0x9b4e, 0x8576, 0x75c7, 0xf333, 0x5491, 0xb3b3, 0x9393, 0x3c28, 0x07f5, 0xf3b5, 0x03ad, 0x44c9, 0xd9e0,
    0xeba4, 0x360e, 0x7c7c, 0xcbcb, 0xcc07, 0x572b, 0x1c6c, 0x49d7, 0x9a6d, 0xce5b, 0xdcfb, 0xb518, 0xb2c6, 0x2a73, 0x5587, 0x7f95,
    0xbfd2, 0x000a, 0x1ab6, 0xb5d8, 0x8009, 0x044d, 0x8823, 0x638a, 0x06d0, 0x064c, 0xf0ac, 0x2210, 0x0f9f, 0xd56f, 0x3f1c, 0x9493,
    0x844d, 0x7e2e, 0x3da4, 0x0708, 0x470b, 0x311f, 0x9bed, 0x0d63, 0xa4e0, 0x330b, 0xff94, 0xc4c8, 0x92da, 0x9dce, 0xea9f, 0xbd99,
    0xb7cd, 0xfe36, 0x6f56, 0x0824, 0xace8, 0xc5c0, 0x000c, 0x43f2, 0x8ae3, 0xee13, 0xff31, 0xa4a0, 0x3879, 0x66c3, 0x8bcd, 0xc35f,
    0xfcab, 0xac3a, 0xe38a, 0x13ee, 0xf85a, 0x5748, 0xb949, 0x16c8, 0x2919, 0xd3d6, 0xa653, 0x2608, 0xe215, 0xfe2a, 0x408b, 0x5a1f,
    0x7808, 0x7b29, 0xf71e, 0x6f0d, 0xb562, 0x3fd3, 0x3324, 0x313d, 0xf76b, 0x0109, 0x0e78, 0xea50, 0x4736, 0xdd42, 0xd0f3, 0x5440,
    0x7bca, 0x0891, 0x73d5, 0x778b, 0x800a, 0x1af1, 0xc388, 0x8f13, 0x0591, 0x7238, 0xae87, 0x9be7, 0x2697, 0x432d, 0x4974, 0xace0,
    0xb392, 0x48fa, 0x2d62, 0xbd35, 0x3366, 0x2a64, 0x5263, 0x9ab6, 0x6b6b, 0x2a2a, 0x1db9, 0x79e9, 0xf6ea, 0x229d, 0x41dd, 0xddd5,
    0x23cc, 0xd8c7, 0x3d3d, 0x0e0e, 0x999f, 0xa48a, 0x35d9, 0x62e7, 0x423c, 0x2f70, 0x5ce2, 0x83d8, 0xa62f, 0x54bf, 0xb8f0, 0xc0a3,
    0x6157, 0x7abe, 0xe558, 0x0ec4, 0x900d, 0x311c, 0x4af5, 0x844f, 0x1e68, 0x8f9f, 0x7ee5, 0x4f41, 0xa11a, 0x10ba, 0xa17c, 0xf05b,
    0xeb52, 0x200d, 0x8c67, 0x923a, 0x2a57, 0x4d8a, 0x54a5, 0x50ce, 0x5570, 0x2da4, 0x88a2, 0x27b6, 0x57df, 0x45b9, 0x2987, 0x765b,
    0x42cd, 0x7641, 0xa83b, 0xbbba, 0x22e1, 0xc36c, 0x1275, 0xba5d, 0x796b, 0x7273, 0x168c, 0xbf1c, 0xc7c7, 0xbcbc, 0xb5bc, 0x39b9,
    0x0863, 0xb829, 0xea0f, 0x5078, 0xdaf9, 0xd681, 0x3b3b, 0x3939, 0x7257, 0xe315, 0x1494, 0x3fe6, 0x8a36, 0x5815, 0x18b5, 0xfbdc,
    0xea88, 0x8b73, 0xf55e, 0x3ed9, 0x5c19, 0xab6c, 0x9b0b, 0x8855, 0xd9c8, 0x679c, 0x21ee, 0x6f3f, 0xa3be, 0x86d0, 0xc983, 0x61d9,
    0x3e5d, 0xd38b, 0xf608, 0x67ce, 0x6749, 0xeb47, 0x524c, 0xaa7d, 0x07af, 0x2b26, 0x6b97, 0x3cd1, 0x864c, 0xae70, 0xe8ea, 0xa14c,
    0xfeb4, 0x56d0, 0x8367, 0x2513, 0xa06a, 0x3331, 0x14a0, 0xf5f1, 0x9d36, 0x74eb, 0xfed3, 0x701c, 0x826e, 0xd19e, 0x8285, 0x70ad,
    0xc28a, 0x1675, 0xea24, 0xbb74, 0x8a4e, 0x7f6e, 0x6e82, 0x9ed1, 0x1f30, 0xad5c, 0x548e, 0xe5a6, 0x5094, 0xc5b3, 0xa210, 0x23a2,
    0xfd78, 0x1914, 0x462a, 0x84db, 0x9c03, 0xa138, 0x8e0e, 0xe646, 0x10f9, 0xc413, 0xf246, 0x864e, 0xa924, 0x729b, 0xaebe, 0x849b,
    0x59ea, 0xd1c4, 0x8758, 0x0692, 0xa932, 0xff9e, 0xd1ab, 0xbd3d, 0x58fe, 0x7891, 0x65dd, 0x98eb, 0xd3dc, 0x1bcd, 0x5a17, 0xbdd0,
    0x7d4e, 0x2073, 0xa91c, 0xcb4d, 0x58c8, 0x906f, 0x3e60, 0x5ab9, 0xd540, 0x6266, 0x4d06, 0xca0a, 0x3e94, 0x8693, 0xeee6, 0x9bb5,
    0x0fad, 0x45a0, 0x4421, 0x4744, 0x46a7, 0xa3cc, 0xa128, 0x8b67, 0x3215, 0xb319, 0x7320, 0x4e7d, 0x1843, 0x4dc1, 0xc77e, 0xd5ec,
    0xf0b6, 0x25f2, 0xe2e7, 0x44d8, 0x8532, 0xa3ab, 0xfa80, 0x6a02, 0x8c5c, 0x9ea0, 0xe1e2, 0xf8a9, 0xbd2f, 0x374f, 0x6c2e, 0x2156,
    0xf244, 0x7be6, 0xbca8, 0xb5d9, 0xb9c2, 0x1932, 0x901a, 0x0407, 0x2102, 0x0acf, 0xfc6e, 0xf664, 0xe9d3, 0x3724, 0x7065, 0xadb2,
    0x248b, 0x8b24, 0xd449, 0x76e9, 0x5d93, 0x2e76, 0x8515, 0x2cea, 0x5ddf, 0xeeec, 0x8ee1, 0x46e9, 0xab34, 0x40ad, 0x7329, 0x8eea,
    0x1627, 0x19a0, 0xdd04, 0x3da3, 0xff9d, 0x0e81, 0x149d, 0xfedc, 0x5560, 0xda28, 0x2ed3, 0xd32e, 0x4369, 0x12fa, 0x6eaf, 0x29d2,
    0xcdd0, 0xf4ca, 0xae30, 0x3d65, 0x344f, 0xe5da, 0x364e, 0xc495, 0x96c5, 0xd4a2, 0x2e39, 0x73f4, 0x874a, 0x43f0, 0x03d9, 0x8a21,
    0x84c1, 0xb3da, 0x08ca, 0x92e9, 0x5a66, 0xed37, 0x5a2c, 0x0dd8, 0x0d45, 0x1a53, 0xab2b, 0x613f, 0x4af3, 0xa78d, 0xa23a, 0xdce2,
    0xde72, 0x6cd3, 0x038e, 0xda7f, 0xdb6e, 0x6edb, 0x979e, 0x91db, 0x01a1, 0xa01e, 0x86d2, 0x25f4, 0xaf70, 0xeb76, 0xdd5e, 0x53a4,
    0x8817, 0x6fe8, 0xe82b, 0x693b, 0xf36e, 0xebbc, 0xa275, 0x69bb, 0x40bc, 0x7f43, 0xaac0, 0xb451, 0x7d8c, 0xc23c, 0x5da6, 0xa65d,
    0x6473, 0x2dd4, 0x7cf1, 0xdb9e, 0x8979, 0xe1a7, 0x12b5, 0x5eb7, 0x0b37, 0x3379, 0x40a4, 0xa2fe, 0xd1b6, 0xdef1, 0x4f4c, 0xc90c,
    0x5a75, 0xe51a, 0x6610, 0x79d9, 0xa5c9, 0xcb50, 0xc395, 0x09e3, 0x0839, 0x703b, 0x8c38, 0x38f1, 0x4ee4, 0xf93a, 0x8e66, 0x6dc9,
    0x540e, 0x91f5, 0xa0ea, 0x1577, 0x467b, 0x09ba, 0x6d2b, 0xf419, 0xd4bf, 0x4c87, 0xff3b, 0x1d02, 0xde3d, 0xd97d, 0x293a, 0xfdb9,
    0x6566, 0x715d, 0xc637, 0x0bde, 0xc2b5, 0x0a16, 0xa79d, 0xee8c, 0x57be, 0x2630, 0x2c4e, 0x3340, 0x00f5, 0x0d08, 0xba09, 0x7b46,
    0x4653, 0xf747, 0x4ce8, 0x44a0, 0x2823, 0xa64b, 0x44e0, 0xad62, 0x971e, 0x7d42, 0xc696, 0x178b, 0x58f0, 0x78c7, 0x5392, 0x7dd5,
    0xc1ed, 0x4b6c, 0x0749, 0xdcd0, 0x0e82, 0x4d5c, 0x3d36, 0x95f1, 0x8a0f, 0xf814, 0x67c7, 0x5bba, 0x417c, 0x1abe, 0x8b52, 0x165b,
    0xbf3f, 0xbee1, 0xfda7, 0xe038, 0x9333, 0x3393, 0x3a6d, 0xe9d6, 0x06ee, 0x7b34, 0x46e0, 0x4eef, 0xdf5d, 0xecee, 0x36ee, 0xceb4,
    0xb8ae, 0x32b3, 0x050b, 0xe15a, 0xc8fa, 0x2a07, 0x04dd, 0xa33d, 0x37f4, 0xc40b, 0x75de, 0x79b7, 0xb669, 0x6f39, 0xb76d, 0x6db7,
    0x8489, 0xae91, 0xcbe2, 0xd263, 0xf344, 0xae5d, 0xba02, 0x3b4b, 0xdd06, 0xa212, 0xadab, 0xbdbe, 0x98dd, 0xb41e, 0xd57b, 0xfb64,
    0x6303, 0x0c01, 0x1ab7, 0x8911, 0xac98, 0x1ebc, 0x9ba3, 0xf64b, 0x4498, 0xc9e7, 0x39de, 0x6f9c, 0xf8f5, 0xd5da, 0xaa23, 0x2dce,
    0x33f9, 0xb366, 0x06cf, 0x4a26, 0x5391, 0x849a, 0xfd69, 0xada0, 0x8abd, 0xcddc, 0x52ee, 0xb0aa, 0x2144, 0x4447, 0x7f1a, 0x9ce7,
    0xaa64, 0x29c0, 0x2940, 0xebe3, 0x7456, 0xe062, 0x40d5, 0x6662, 0xe5f8, 0x60b4, 0x8ed8, 0x13a9, 0x785c, 0x51e0, 0x9a84, 0x9153,
    0x4ac0, 0x8bbc, 0x7b6e, 0xc5f3, 0xd64d, 0x74a2, 0xad44, 0xadd7, 0x1cf1, 0x7ef1, 0xeee3, 0x19d9, 0x5a09, 0x115d, 0xf40d, 0x9db9,
    0x81e2, 0x43ab, 0x59c2, 0x9664, 0xb49c, 0x7a28, 0xfdde, 0xcce9, 0xe420, 0xedc0, 0xde93, 0x6b4d, 0x4ebe, 0xb913, 0xf9e9, 0x5dd0,
    0xd9dd, 0xbebb, 0x9344, 0x5dbe, 0x9d69, 0x6ddc, 0x85f8, 0x0662, 0x9da7, 0x8cee, 0x5669, 0x815a, 0x2b52, 0xeb6b, 0xe652, 0x1dd5,
    0xf668, 0x0ddc, 0x3dde, 0x7dd9, 0x9dde, 0x8dc0, 0xbcf0, 0x4dd7, 0x415f, 0x49db, 0xbbbe, 0xddd9, 0xaa2a, 0xc666, 0x1dc3, 0x8dd2,
    0xd78f, 0x9141, 0xe3dc, 0x3dda, 0x15dd, 0x6d67, 0x04a5, 0xba23, 0x1b79, 0x55f6, 0x9cd5, 0xc1dd, 0x1bbf, 0x993d, 0xaf45, 0xd65f,
    0x3d0a, 0x6342, 0xa15f, 0x1e8f, 0x39bc, 0x4579, 0x7c89, 0x2dbc, 0x0ef4, 0xd300, 0x5dd6, 0x8eb9, 0xfb52, 0xa9db, 0xa03d, 0x9dcb,
    0x6726, 0x2667, 0xabe8, 0x3409, 0xd3ad, 0x74da, 0xcea2, 0x5158, 0x70af, 0x76eb, 0xbb26, 0x5cec, 0x3e83, 0x6da5, 0x0a2b, 0x59d4,
    0x7dc3, 0x7e7f, 0x75a2, 0xbb69, 0xc071, 0xfb4f, 0x9268, 0xcbb7, 0xa29d, 0xb650, 0x4916, 0x1649, 0x2fa1, 0x3694, 0xa893, 0xedd2,
    0x736c, 0x7f9c, 0x1266, 0x7649, 0x8891, 0xf820, 0x313b, 0x25d6, 0xf049, 0x14de, 0xf94e, 0x0dcc, 0xa916, 0xada1, 0x9591, 0x7d60,
    0xc174, 0x1ce6, 0x029e, 0x6e34, 0x8e06, 0xfbca, 0x16b2, 0x149e, 0x5416, 0x6ca9, 0x5d8a, 0xc745, 0xd6f5, 0x1651, 0x39a7, 0xca1c,
    0x846d, 0x9694, 0x1500, 0xe235, 0x61c7, 0x3386, 0xf78b, 0xe788, 0x5740, 0x6769, 0x1f50, 0x4d40, 0x42ed, 0x671c, 0x8fa1, 0xa13a,
    0x0894, 0x099d, 0x709b, 0x48c5, 0xafdf, 0x28ee, 0xbb0a, 0xf3d5, 0x178e, 0x2390, 0xabcf, 0x9a61, 0xf78e, 0x8db6, 0xe77d, 0x4dd3,
    0x9af1, 0x37c5, 0x1696, 0xe270, 0xb7d1, 0x8272, 0xc34d, 0x2bb8, 0xf268, 0xe254, 0x2e6d, 0xc812, 0x848d, 0x5a0d, 0x083d, 0xa936,
    0x9481, 0x000b, 0xb180, 0xeabb, 0xe234, 0x117a, 0x2072, 0xbf3e, 0x35ea, 0x5b50, 0x586c, 0xbd87, 0xb075, 0xf89f, 0xdca9, 0xe658,
    0x431c, 0xc091, 0x0f14, 0x1d5a, 0x4ae0, 0xde7f, 0x1b8e, 0x2b72, 0xb8ce, 0x0d34, 0xddc3, 0x419c, 0x8090, 0xf364, 0x8add, 0x65ef,
    0xf264, 0xd746, 0xb222, 0x4389, 0xd5a2, 0x58e8, 0x1119, 0xacce, 0x2e4d, 0x5a86, 0x40dc, 0x1b6a, 0x542e, 0x91eb, 0x33cf, 0xd1d6,
    0x4a81, 0x45dc, 0xd9ce, 0xad26, 0x0be9, 0xac2f, 0x41e8, 0x49b5, 0x075c, 0x7f83, 0x51bf, 0x9409, 0xf238, 0x07f2, 0xa934, 0x5572,
    0x9ad1, 0x7823, 0xee2e, 0x3f37, 0xe5c1, 0x8667, 0xd69c, 0x8c82, 0x0b79, 0x876b, 0xc726, 0x1e39, 0x58dc, 0x8591, 0x74cd, 0x3db5,
    0xcbd2, 0x3d25, 0x49f6, 0xfa04, 0xb0c5, 0x98f8, 0x33ae, 0x4d03, 0xc927, 0xd4da, 0xf4e5, 0x97b9, 0xb5f4, 0xffb8, 0x1be8, 0x733b,
    0xd085, 0xd508, 0xc751, 0x0633, 0xfd45, 0x4881, 0xec83, 0xb158, 0x2ea3, 0x0b94, 0x850c, 0x02b1, 0xe250, 0x88ac, 0xf37f, 0x2e88,
    0x6a2b, 0x63b3, 0xf9f5, 0x0391, 0x530f, 0x6331, 0x4011, 0x0b4c, 0xc32d, 0x0a6b, 0xa2fc, 0x9a70, 0xc405, 0xec79, 0x4e41, 0xb9d4,
    0x0259, 0xcda5, 0x83b7, 0xcc33, 0xa9a2, 0xa8ba, 0x0296, 0xb036, 0x0ef1, 0xa697, 0xb1f9, 0x8edf, 0x80b8, 0x8f3d, 0x9e83, 0xadc4,
    0xbe44, 0x16de, 0xd0af, 0x8f47, 0x8252, 0xdd11, 0x71ee, 0x1eed, 0x7eef, 0xe674, 0x2ce1, 0x4b32, 0x56a2, 0xd6eb, 0x3db7, 0xe2f9,
    0xe1ca, 0x84f1, 0x3308, 0xbcec, 0x895a, 0xaf5b, 0xbe78, 0x6dcf, 0x2d16, 0x06ec, 0x0465, 0xc974, 0x1b27, 0xe24a, 0x5718, 0x9eb2,
    0x4b4f, 0x5ed6, 0x7b79, 0x3a7c, 0xa5ab, 0xf808, 0xa546, 0xe3a6, 0x3021, 0xea90, 0x8b1b, 0x30b2, 0xfd6a, 0xb5f6, 0xe517, 0x84d3,
    0x2f44, 0x6ba8, 0xf4d2, 0x21de, 0xfb29, 0x485a, 0xfedd, 0xde9b, 0xb160, 0x6a82, 0x27d3, 0xfd2a, 0xfcd5, 0x88b6, 0xe04d, 0x6151,
    0x0f46, 0x90c2, 0x117b, 0xb060, 0xc80e, 0x4454, 0xcec8, 0x771f, 0xe583, 0x10d3, 0x523f, 0x60fd, 0xe7ba, 0xf01f, 0x6bfb, 0x3660,
    0x437a, 0xf93d, 0x107d, 0xfca3, 0xffea, 0x35cd, 0xef0d, 0xbbe1, 0x7f21, 0xbc94, 0x09ad, 0xf9bd, 0x4866, 0x7a62, 0x7bbf, 0x4402,
    0xe214, 0x3563, 0x8af9, 0x5498, 0x7f20, 0x238f, 0x75dd, 0x4e7c, 0xffc2, 0xcd67, 0xc70c, 0x5622, 0x84cd, 0x0305, 0x5efe, 0x7d9e,
    0xbfd3, 0xd6cc, 0xd3f2, 0x6ece, 0xe60c, 0xec68, 0x6358, 0x1a24, 0x64a5, 0x899e, 0x2482, 0x8364, 0xfa2f, 0x03f7, 0xc828, 0x69cd,
    0xaeb3, 0x22ec, 0xce12, 0xb324, 0x43dd, 0x2830, 0xe7a1, 0x80a8, 0x39ee, 0xd348, 0x0ea7, 0x9dda, 0xbf1e, 0x5abb, 0x7d3a, 0x86e4,
    0xaa55, 0xe035, 0xb13d, 0x1445, 0x9f02, 0xf141, 0x2f12, 0xcb1f, 0x1cae, 0x4f18, 0x3790, 0x9d8e, 0x5bec, 0x2e33, 0x429a, 0x6ce5,
    0xb632, 0x9062, 0xa031, 0x7e5b, 0xf87f, 0xc342, 0x246c, 0xd06a, 0x605a, 0x8a00, 0x9d0a, 0xbd49, 0x8e00, 0x776c, 0x653f, 0x0b49,
    0x26a6, 0x9be0, 0xdbf2, 0x8d01, 0x0160, 0x9032, 0x072f, 0xa261, 0x52c0, 0x06d6, 0x4bbe, 0x7e8f, 0x8109, 0x5487, 0x9a18, 0xdbb0,
    0xd4ed, 0x7da9, 0x6980, 0x077a, 0xcc9e, 0x8ddf, 0x2afb, 0x8dbc, 0xdc89, 0x275f, 0x76e0, 0x7210, 0x88ae, 0xad04, 0xbf78, 0x8e78,
    0x7c9d, 0x2772, 0xb81d, 0x841c, 0xef78, 0x68db, 0x99bc, 0x859b, 0xd3c6, 0xa579, 0x8d29, 0x86a2, 0x21f8, 0x43a5, 0x6a51, 0xcb62,
    0x8965, 0x09dc, 0x8bd0, 0x11a7, 0x751d, 0xecb7, 0x7139, 0x3f9a, 0xc7f9, 0xc736, 0x7459, 0x99e5, 0xa12a, 0x1496, 0x5b53, 0x468d,
    0x003e, 0xe291, 0x5c74, 0xa5d8, 0x6bd6, 0xc8f3, 0x18c6, 0xb88c, 0x5d43, 0x7a21, 0x893d, 0x13d8, 0xbd67, 0x506e, 0xb584, 0xfdcb,
    0xfc25, 0xd8df, 0x07fc, 0xeeb9, 0xefc1, 0x7c96, 0x71aa, 0xb296, 0x2e69, 0x6ba1, 0x3969, 0x50f4, 0xbdd6, 0x472c, 0x0618, 0xc649,
    0x35ca, 0xeab4, 0x6ef4, 0x8625, 0x2aa5, 0x7286, 0xdb5e, 0x590f, 0xc37b, 0xf86e, 0xd440, 0xdbfe, 0x2fef, 0x3301, 0x8563, 0x2642,
    0xbfdf, 0x5aac, 0xcbfc, 0x90df, 0x5ff6, 0x3f12, 0x321f, 0x9fff, 0xc43e, 0xe403, 0x9817, 0x1fc9, 0x8883, 0x8b37, 0xeddd, 0x85a2,
    0xed6e, 0x46fe, 0xcf88, 0x9fb1, 0xf215, 0x9bdd, 0xe86c, 0x36be, 0x8c47, 0x7105, 0xd131, 0xf489, 0xb379, 0x2428, 0xf6c3, 0xa524,
    0x7561, 0xf7c3, 0xeccb, 0xfca5, 0xff08, 0x22d7, 0xb8b5, 0x4d58, 0xb62a, 0x1f80, 0x1640, 0x4a96, 0x51ff, 0x5b17, 0xe9ae, 0xc0a4,
    0x5e1c, 0xec30, 0xbe07, 0xbf2b, 0x1fed, 0x166b, 0xdf63, 0x2887, 0xb110, 0xf7f0, 0x1363, 0xde24, 0xcd88, 0x3167, 0x22ff, 0xd7ff,
    0x2a37, 0x731a, 0x650d, 0x4161, 0x50d6, 0x1614, 0xdab2, 0xf9be, 0xb09e, 0x51b7, 0xb4d4, 0x420c, 0x25c8, 0x398f, 0xb1e8, 0xaf27,
    0xdc06, 0xcf09, 0x7623, 0xd54a, 0x8bf3, 0xbe4c, 0xfae8, 0x059d, 0x5ef2, 0xdc39, 0x9945, 0x73e4, 0x565e, 0x1f51, 0xef25, 0xc39d,
    0x32cc, 0x735c, 0x2d72, 0xf08f, 0x1aa3, 0xeb9a, 0x6b0f, 0xd5b2, 0x2cdd, 0x10fa, 0x1d57, 0xcf4c, 0x50ae, 0x2b31, 0x6284, 0x853d,
    0xcb5c, 0xe480, 0x2434, 0xf815, 0x7fd6, 0x3c24, 0x17c2, 0x65af, 0x7ffd, 0x2ff2, 0x490d, 0xc6b9, 0x786d, 0xe51d, 0x15fc, 0xbe05,
    0xf615, 0xbedb, 0x117d, 0xe0cc, 0x4599, 0xe473, 0xe5fb, 0xb670, 0x84ba, 0x2d4d, 0xb647, 0xa232, 0x1258, 0x4b8c, 0x6f59, 0xca92,
    0xa158, 0x67ac, 0x2240, 0x6286, 0xadd4, 0x19c0, 0x3744, 0x3bf0, 0x88e3, 0x2df4, 0xd99d, 0xc2dd, 0xebdc, 0x15c9, 0x372a, 0x1a73,
    0x6351, 0xb961, 0x40f2, 0xe694, 0x4b2e, 0xd528, 0x85b1, 0xfcf1, 0x2967, 0x7fbc, 0x673c, 0xb259, 0x5908, 0x1088, 0x86a9, 0x5b70,
    0xb0bf, 0x230c, 0x0325, 0x6a5e, 0x487a, 0xd9a9, 0x5b9f, 0xbcb4, 0x8dff, 0x07f1, 0xf40c, 0x8a20, 0x1e67, 0xe2b1, 0x3321, 0x8316,
    0x3ff3, 0x097a, 0xd91d, 0x2a4a, 0xdfbf, 0xac5a, 0x9dee, 0xb898, 0x06fd, 0x7ade, 0xbcdc, 0x1559, 0x7f8e, 0xbe0d, 0x6c94, 0x2b46,
    0x61a8, 0xe142, 0xd856, 0x91ce, 0x580e, 0xd1dc, 0x72f4, 0x1f6a, 0x92d3, 0xdfe6, 0xa294, 0x4a47, 0x2796, 0x7108, 0x31d1, 0x89f4,
    0xe07c, 0xc264, 0x8cf0, 0x92b5, 0xa3fa, 0x123c, 0xc8dd, 0x3e14, 0x7a8c, 0xdebe, 0xb494, 0x0e7e, 0xec23, 0xcac3, 0xdfca, 0xe7d8,
    0x5550, 0x05aa, 0xdeb7, 0xb899, 0x8435, 0x8cc6, 0x6c85, 0x81bf, 0xf7f9, 0x1103, 0x2dfd, 0x7ae7, 0xa1bb, 0x24b5, 0xb097, 0x3ecd,
    0x28fd, 0xde95, 0x7e50, 0x4cc1, 0xf6b4, 0xdc9f, 0xd28f, 0x5de9, 0x93c8, 0xede8, 0xc8e4, 0x2281, 0xf03b, 0x4437, 0xf3e9, 0x234c,
    0x5027, 0xa45d, 0x95d6, 0xb7eb, 0xa863, 0x0dc2, 0x8c4b, 0x5812, 0x4c72, 0x404f, 0x5b01, 0x8398, 0x15b0, 0x8839, 0x514b, 0x10a9,
    0xa0fa, 0x938f, 0x88f7, 0x226a, 0x5bd4, 0x8950, 0xbaa6, 0x582a, 0x7183, 0x24ac, 0xe8bb, 0xe27b, 0x528c, 0x3e89, 0xb8f1, 0x6b12,
    0x08c4, 0x7948, 0x258e, 0xc33a, 0xb20c, 0x3d1b, 0x0f65, 0x719a, 0xab17, 0xf901, 0xa88a, 0xb6c6, 0xe670, 0x7859, 0x1001, 0x0c39,
    0xd843, 0xf078, 0x03d6, 0xeb94, 0x5fa8, 0x8b11, 0x09ae, 0x0142, 0x793b, 0xa6a3, 0xc386, 0x03b5, 0x0dbe, 0x8e7f, 0x6e8a, 0x1018,
    0x2b5a, 0xe8cc, 0x556a, 0x41b1, 0x8f7f, 0x69c3, 0x6a1f, 0xf472, 0xb51e, 0xcee4, 0x4bc6, 0x9ecf, 0x4d41, 0xff18, 0x982f, 0x45e4,
    0xa582, 0x6baa, 0x6a8b, 0xcd70, 0x06f5, 0xd4e3, 0x5b59, 0x14e7, 0xc414, 0xcde5, 0xedc9, 0x55ff, 0xda31, 0x626f, 0x7044, 0xd4ab,
    0x1f53, 0x939c, 0x8a10, 0x3d32, 0xad65, 0x727c, 0x7241, 0x0655, 0x7ec5, 0xa1b2, 0x9785, 0x0e67, 0x4330, 0xe4a3, 0x406c, 0xca87,
    0xa85f, 0x118b, 0xd92b, 0x4066, 0x651b, 0xa793, 0x8c36, 0xcc0a, 0x03e4, 0x3ec4, 0x0713, 0x7e5e, 0x9583, 0xd939, 0xdcb5, 0xdd61,
    0x6137, 0x7c17, 0xb19f, 0x88cf, 0xb6ba, 0xda75, 0x6e9b, 0xd32c, 0x4e55, 0x76ae, 0x2f98, 0xe445, 0x484a, 0xbadb, 0x4c0d, 0x02da,
    0x19db, 0x0340, 0x4a62, 0xa1d6, 0xe41e, 0xe9c9, 0xf9d9, 0x32e7, 0x8c81, 0x072e, 0xed36, 0xb49b, 0x7963, 0x8c66, 0xcaa2, 0xb539,
    0xb8b2, 0x2fa5, 0x01a5, 0x5d97, 0x7370, 0xc409, 0x52c4, 0xe610, 0x7bce, 0x57e3, 0xf736, 0x8d9a, 0x0ea4, 0x97d7, 0xdb3b, 0x95ed,
    0x4b51, 0xa910, 0xdca7, 0x0b76, 0xb480, 0x933a, 0xdf77, 0xf6cb, 0x4ad5, 0x2376, 0x368b, 0x3af0, 0xad93, 0x66e6, 0x2e8e, 0x9125,
    0x3fa9, 0x25ca, 0xb751, 0x9eb0, 0x9128, 0xcbad, 0xdebd, 0x6456, 0x7afa, 0xb08e, 0xb4f6, 0x9fdc, 0x2ac9, 0x8a6d, 0x0494, 0x64ca,
    0xfcd3, 0xf2bc, 0x89e3, 0xed1b, 0x30fc, 0x9714, 0x0fd8, 0xc1d2, 0x6457, 0x2a12, 0x877f, 0x7682, 0x0781, 0xb3af, 0x0e45, 0xc50e,
    0x7eeb, 0x43a3, 0x9def, 0x4396, 0x4c3e, 0xd5d0, 0xb734, 0xc191, 0x210c, 0x9c37, 0x01be, 0x2363, 0xb7f7, 0x17b3, 0x8ec5, 0xb980,
    0xaf76, 0x83d2, 0x02cc, 0x58f7, 0x0d4f, 0x0858, 0xe7a3, 0x7387, 0x14b1, 0x3984, 0x7e76, 0xccb9, 0xd6e7, 0x2f2d, 0x616c, 0x7f3c,
    0xe5f5, 0x03a9, 0xa319, 0xde58, 0x78ac, 0xc799, 0x0422, 0x1642, 0xc681, 0xdeae, 0xbb84, 0x39d7, 0xbefc, 0x44fb, 0x9d02, 0xdd21,
    0xd10d, 0xfc0e, 0x620e, 0x056c, 0xe2cd, 0xe220, 0x090a, 0x6cde, 0x66de, 0xf0c7, 0xbd50, 0xb57d, 0xb844, 0x54c0, 0x23bd, 0x07ca,
    0x794b, 0xf16a, 0x942c, 0x58d5, 0xbeff, 0x23fe, 0x175d, 0x52a9, 0xf4a3, 0x577a, 0xe312, 0x9604, 0xcc87, 0xe7ff, 0x3a1b, 0x8daf,
    0xc251, 0x1508, 0x483c, 0x0745, 0xbc9c, 0xbc95, 0x67d2, 0xbd9d, 0xfd2e, 0xb890, 0xad2a, 0xa93a, 0xca0e, 0xf41d, 0x7ddd, 0x9157,
    0x1af9, 0x96cf, 0x2a9f, 0x2a50, 0xacc2, 0xe1b3, 0xb289, 0x8b43, 0x918d, 0x9512, 0x7dba, 0x292f, 0xef68, 0x0d76, 0xc3ee, 0x5741,
    0xca48, 0x2263, 0x057c, 0x199a, 0xb7ba, 0x5add, 0x6da7, 0xcf3b, 0xb59c, 0x5e3e, 0x05e6, 0xf247, 0xc4eb, 0xd924, 0x54ec, 0x2e36,
    0xbf91, 0x5bbb, 0xf777, 0x375c, 0x3558, 0x3fec, 0x5d1a, 0x568a, 0x597e, 0x7355, 0x2087, 0x382d, 0xa459, 0x5377, 0x82af, 0x4a79,
    0x22c1, 0xba55, 0x76a0, 0x70d8, 0x809b, 0xd16c, 0x8cb1, 0x20eb, 0x7d27, 0x9b81, 0x31e2, 0xd071, 0x5d7c, 0x7ba0, 0xb275, 0xdccc,
    0xb653, 0x7d37, 0xe2f3, 0x00e4, 0xa9a5, 0x9750, 0x9577, 0xe902, 0xbbbd, 0xb450, 0xd3c5, 0x0b93, 0xc3c4, 0xecc8, 0x8a35, 0x8c20,
    0x5a4f, 0x5688, 0x465a, 0x52e8, 0x1b0e, 0xd40e, 0xf7ce, 0xcb21, 0xa9e1, 0x0b01, 0xbb60, 0x018a, 0xba3d, 0x4117, 0x40c6, 0x9703,
    0x5023, 0x7a0b, 0xd121, 0xa7aa, 0x11f6, 0x61e5, 0xde26, 0xc014, 0x87e6, 0x5547, 0xce43, 0x42a9, 0xcfad, 0x5a5e, 0x33a3, 0x68ad,
    0x569e, 0x34f8, 0x2f8a, 0xed2b, 0x0a8d, 0xb011, 0x1770, 0x2fa3, 0xb6dc, 0xd778, 0x773d, 0x88e6, 0x6c9b, 0x1baf, 0x834f, 0xe569,
    0xbad5, 0xc9a6, 0x741a, 0xd079, 0xd636, 0x9521, 0x5025, 0xa4d1, 0xa81b, 0xe2b9, 0x5219, 0x636d, 0xf9e1, 0xf3b1, 0x26f2, 0x4148,
    0xdb2c, 0xc67b, 0x3fa6, 0x2648, 0xdf76, 0xb897, 0x9e1a, 0xb010, 0xc2e1, 0x05a1, 0x4cc5, 0x9129, 0x084d, 0x7712, 0x58d9, 0xc044,
    0x89ba, 0xac5b, 0xc211, 0xdcef, 0x7621, 0x0f78, 0x6880, 0x4e6c, 0x743f, 0x2862, 0x7599, 0x01ab, 0x121d, 0x7aaa, 0xa1ff, 0xc040,
    0xa431, 0x11cc, 0x88c1, 0xfc14, 0xe87d, 0x0b41, 0x0d7d, 0x022b, 0x3b1b, 0x81b6, 0xb170, 0x2808, 0xc166, 0xaabe, 0xb340, 0xdb20,
    0x146a, 0xb998, 0x7035, 0xb607, 0x9f5a, 0x822d, 0x55bd, 0x4b68, 0x8145, 0x6dfa, 0xc068, 0xab3a, 0x98e9, 0x5fb7, 0x6527, 0xac4e,
    0x2b65, 0xdae3, 0x62bb, 0xfa29, 0xd661, 0xd9b9, 0x8060, 0x9091, 0x95d2, 0x5fd1, 0x8ab2, 0x3b07, 0xa630, 0xcb95, 0x0604, 0xa29b,
    0x702b, 0xaf83, 0x6e59, 0x4acd, 0xdfe3, 0x70da, 0xa4be, 0x9f92, 0x902f, 0x3e17, 0x3478, 0x5c42, 0xf111, 0xd7be, 0xc9e5, 0x2851,
    0x553d, 0x0e89, 0x6129, 0x5cbd, 0x7f22, 0x44c5, 0xc7da, 0x2b6f, 0x90e5, 0xe77b, 0xfb46, 0xe278, 0x6e26, 0xf7ad, 0x64ad, 0x233c,
    0x0843, 0xe70d, 0xd915, 0x8a84, 0x7dfe, 0xc440, 0x1ea3, 0xb7af, 0x3db3, 0x6c7c, 0xf862, 0x3a0a, 0x85e9, 0x37de, 0x676a, 0xbe92,
    0xde4e, 0xe9a8, 0xad47, 0x33b9, 0xac27, 0xd46d, 0x97bc, 0x770e, 0x8d08, 0xe6ef, 0x864f, 0x5bea, 0x0a77, 0x5277, 0x83de, 0xded4,
    0x67c8, 0x5e4b, 0x17e1, 0x76f8, 0x1e13, 0x97e6, 0x79fe, 0x0c70, 0x3ae5, 0x80f5, 0x506c, 0x955a, 0x5058, 0x5943, 0xb552, 0xdd88,
    0x8b07, 0x81fa, 0xda67, 0x7b87, 0x97f6, 0xa03f, 0x8bde, 0xc120, 0x6cd2, 0xd9dc, 0xfa03, 0x697f, 0x16a4, 0xfba9, 0x72fb, 0x1274,
    0x501d, 0xae3e, 0x7cff, 0xf71b, 0xe2f5, 0xe184, 0xfab3, 0x4638, 0xcbf0, 0x9bb8, 0xa833, 0x4cf6, 0x73bb, 0x7b7c, 0xe3ea, 0x01d5,
    0xc504, 0x3d15, 0x053a, 0x43ba, 0xf15d, 0xaf36, 0xb3d2, 0x96d6, 0x8195, 0x8cbd, 0x6809, 0x0849, 0xbc56, 0x9c90, 0x8030, 0xd4c9,
    0xf72c, 0x7427, 0x51f4, 0x1ac4, 0x8d7f, 0xe566, 0xf56c, 0x26cc, 0x1474, 0xc5f0, 0x925f, 0x592e, 0x196c, 0x63cd, 0xd380, 0x8fc9,
    0x46f4, 0xb947, 0x6e8d, 0x2445, 0x9e1b, 0x2b9a, 0x199d, 0x6b45, 0x3bbc, 0xdbb7, 0xd7bb, 0x8acc, 0xfbbc, 0x5bae, 0xd42b, 0x0f3b,
    0x50cc, 0x4804, 0xe3d6, 0x279e, 0xd359, 0x3929, 0xf6d3, 0x1c9a, 0xfb85, 0x4ccd, 0xb68c, 0xc1e9, 0x42be, 0x7bb3, 0x0c60, 0x189c,
    0x8a16, 0x77b7, 0x0915, 0x2bb2, 0xb7e7, 0xec6a, 0xdc1b, 0x0798, 0x06a8, 0x5f1d, 0xcbae, 0xd280, 0xa053, 0xa43b, 0xd94c, 0xe954,
    0xdfc0, 0x42b6, 0x1ee0, 0x79c4, 0x7107, 0x2ac8, 0x4147, 0x0c5f, 0x4408, 0x842c, 0x57c8, 0x766f, 0x3c3e, 0x9993, 0x4485, 0x4b9f,
    0x81ef, 0xcaef, 0xe602, 0x3b16, 0xb9b5, 0xaf6a, 0xc6ca, 0x0226, 0x3f60, 0x074b, 0x0328, 0x55b8, 0xafd1, 0x3c8c, 0x01d8, 0x6df5,
    0xfe94, 0xaec4, 0x5ecc, 0xdfde, 0x9aa9, 0x22cb, 0x1c14, 0x5c3d, 0xc3f0, 0x5c52, 0xe007, 0x8aad, 0x404b, 0x4248, 0x6836, 0xd9b4,
    0x34b4, 0xeea9, 0x8559, 0x67c3, 0xd60a, 0x74c5, 0x352e, 0xdd83, 0x4302, 0xcaba, 0xa387, 0x83d9, 0xa953, 0x114e, 0xdc66, 0xe9a3,
    0x5356, 0x202c, 0x7206, 0x6e21, 0x10cd, 0xae2d, 0x5a3c, 0x5cb8, 0x3173, 0xd428, 0x0a22, 0xd910, 0x24f3, 0x2d21, 0x93f5, 0x37d9,
    0xb65d, 0xe53c, 0x7362, 0x4403, 0x0158, 0x4694, 0xcc84, 0x0c5a, 0x1480, 0x2191, 0xaa61, 0xdc16, 0xf3c7, 0x16c6, 0xd043, 0x5f18,
    0x6a76, 0x1e92, 0x1170, 0x9e16, 0x2504, 0x571b, 0x799c, 0x8ac7, 0xd620, 0x8fa2, 0x42f3, 0xb687, 0x54a3, 0x2cb9, 0x23ee, 0x3924,
    0xb826, 0x0805, 0xf4db, 0x8b02, 0x3311, 0x49ff, 0xb189, 0x126f, 0x0514, 0x06d8, 0x59cb, 0xe3e5, 0xdd0d, 0xa925, 0x6619, 0xae39,
    0x777f, 0x75c3, 0x9ea8, 0x1967, 0xea2d, 0xa844, 0x73de, 0x1abf, 0xd1de, 0xec1a, 0x63fc, 0x0535, 0x3620, 0x43e5, 0xf3f4, 0x9c8b,
    0xcbef, 0xb44f, 0x2f97, 0xc2dc, 0x6f1e, 0x36d2, 0x4ab8, 0xb00b, 0x300e, 0xe7cf, 0x2f34, 0x687b, 0x708d, 0x591b, 0x138d, 0x285d,
    0x65db, 0x53ce, 0x8ce4, 0xd631, 0x71df, 0x9b6d, 0x5d64, 0x6368, 0x6326, 0xa80a, 0x3e7a, 0x7738, 0x7976, 0x3593, 0xa3d7, 0xb00c,
    0x824e, 0x6e5f, 0x9b99, 0xb64e, 0xf985, 0x09cb, 0x2561, 0x8c1b, 0x44a2, 0x2eb7, 0x2ed6, 0xb270, 0xd212, 0x4f32, 0x1a27, 0xba50,
    0x6b3d, 0x3865, 0x4496, 0xba38, 0xe5be, 0xa96d, 0xd83d, 0x52e3, 0x7af7, 0x9159, 0xaee7, 0xd11c, 0x5989, 0x8572, 0xbc69, 0x5a59,
    0x4efc, 0xa535, 0x0197, 0xc67c, 0x0203, 0x4dd1, 0xf5e4, 0x163d, 0x605c, 0xd225, 0x6d9c, 0xe79e, 0x098f, 0xf34b, 0xa778, 0x397f,
    0x4c6e, 0x1ba7, 0x0cfe, 0xe2c8, 0x74cb, 0xe3b5, 0xa5bc, 0xb578, 0xd8a8, 0xdfc1, 0x23ae, 0xe30d, 0x991c, 0x2450, 0xf302, 0x23f9,
    0xe084, 0xc8a4, 0x4620, 0xca43, 0x11ae, 0x236b, 0x4960, 0x2e31, 0xb70a, 0x6500, 0x502d, 0x82aa, 0x6700, 0xb752, 0xeaf5, 0x5bb6,
    0x4e20, 0x839b, 0x03fd, 0xef63, 0x7095, 0x1760, 0xbd65, 0x2a4b, 0xfeb3, 0xe121, 0x4999, 0x4837, 0xefc0, 0xdd10, 0xcea1, 0xf418,
    0x46b4, 0xf176, 0x8d8c, 0x06f8, 0xc593, 0x204c, 0x4268, 0xb893, 0x278e, 0xb46f, 0x4f52, 0x72ef, 0x1780, 0x4790, 0xa09d, 0xdfe1,
    0x411b, 0x2267, 0x70de, 0x8430, 0xbadf, 0xe8d0, 0x3f16, 0x7ae2, 0xf34f, 0xcaf3, 0x5e6f, 0xb48f, 0x0cac, 0x65ec, 0xe182, 0x1237,
    0x3298, 0x325b, 0xe1fb, 0xb0ba, 0x7e43, 0xf32f, 0x29f8, 0x8311, 0xa1f0, 0xee46, 0x5ce3, 0x86a4, 0x871a, 0x5d18, 0x630a, 0xb95c,
    0x1c86, 0x0088, 0xb50e, 0x1253, 0x4bea, 0xf929, 0x79f8, 0xe0c7, 0x71ea, 0x7a83, 0x81c1, 0x223b, 0xa4cf, 0x3b7b, 0x1e31, 0x15c4,
    0x3731, 0x56a8, 0x7bc0, 0xb10b, 0x9541, 0x905c, 0xd033, 0x2882, 0x5afd, 0x04f0, 0xa6e2, 0xb8b0, 0x9a53, 0x03c9, 0xe81f, 0x1f7b,
    0x0b61, 0x65cc, 0x0443, 0x5ff1, 0x361a, 0x5e6b, 0x37fe, 0x1fc4, 0xa13b, 0xb967, 0xa45b, 0xd12c, 0xe586, 0x8d45, 0x8c76, 0x9bd8,
    0x935a, 0xefd5, 0x5484, 0x2a32, 0x8f00, 0x2fc5, 0xbafb, 0xaf22, 0x17a4, 0xdeb5, 0x3ea9, 0xef20, 0x729c, 0x4cb0, 0xe13f, 0xcf04,
    0x1f10, 0x737c, 0x39af, 0x7868, 0x9bfd, 0x1586, 0x417d, 0xf810, 0xd548, 0x7b51, 0xbb1d, 0x2d6d, 0x1050, 0xe162, 0x24d5, 0x2b2c,
    0x6d38, 0xf1ef, 0x97c9, 0x717e, 0x8394, 0xc720, 0x7cea, 0x5825, 0x6a6f, 0xef41, 0x76e2, 0x0f60, 0xe76f, 0x67f6, 0x350d, 0xf8fc,
    0x70d7, 0xda66, 0xbeda, 0xa85e, 0xaf1c, 0xbabf, 0x36d1, 0x8393, 0xea04, 0xb48b, 0xddad, 0xc8df, 0xda25, 0x749a, 0x4ab9, 0xdc9a,
    0xac8b, 0x6d0c, 0x8dd8, 0x2b55, 0xdf47, 0x4b7b, 0x13df, 0x45df, 0xfea4, 0x9728, 0xeb28, 0x6e85, 0xd895, 0xd29f, 0xa5a4, 0xf073,
    0xecf2, 0x266b, 0xebc0, 0xda2c, 0x1655, 0xcda9, 0xc346, 0xcd6b, 0xdd46, 0x7ac2, 0x1ee6, 0x8a0b, 0x29ec, 0x1423, 0x89c4, 0xe49e,
    0x8a2e, 0xb4c3, 0xdb2d, 0x7af5, 0x33db, 0xc6c7, 0xde32, 0x6451, 0xc7a0, 0x0e75, 0xb6d4, 0xdf72, 0x8da8, 0x70be, 0x182e, 0x2371,
    0xd79f, 0x9568, 0x5c50, 0x30f7, 0x593c, 0x04c2, 0xd0ec, 0x767d, 0x42b7, 0x9475, 0x70a6, 0x01b9, 0xbe68, 0x383b, 0x9612, 0xd5cb,
    0xc01c, 0x2247, 0x2c71, 0x19d6, 0x9c30, 0xbc5e, 0x12ea, 0xb534, 0xb517, 0x548d, 0xbee3, 0xdb36, 0x9eb1, 0x8562, 0x0d07, 0x2fa0,
    0xd12a, 0x3faf, 0xa322, 0x4845, 0x1ee9, 0x0543, 0xd91e, 0x88ca, 0xbe10, 0x2d7b, 0x2249, 0xd926, 0x8a19, 0x8900, 0xb75a, 0xd934,
    0x0efe, 0x46c5, 0xb52b, 0x3009, 0x95a9, 0x611c, 0x3c53, 0xb006, 0xd0ab, 0x3e0b, 0x38ef, 0x5d5f, 0x42df, 0x388e, 0xe806, 0xa805,
    0x9544, 0x2bda, 0xfe60, 0xe5b9, 0x2b06, 0x75b6, 0xce0c, 0xd117, 0x652a, 0x15a4, 0xd3a4, 0x2ed1, 0xbf2e, 0x5b23, 0xfc7d, 0x09c6,
    0xf7df, 0xc47f, 0x7bfc, 0x4e1b, 0xab91, 0x91c6, 0x4ed4, 0xf413, 0xedbe, 0x2f71, 0x99fb, 0xeaf0, 0x3b4d, 0x403b, 0x3151, 0xc89f,
    0x4199, 0x4bf7, 0x2a7a, 0x098a, 0xda99, 0xa4af, 0x768d, 0xc677, 0x6b77, 0x37f2, 0x6bc9, 0x0cf9, 0x5827, 0xccbb, 0x931d, 0x244b,
    0xd515, 0x7a63, 0x7955, 0xd1d9, 0xb086, 0xd198, 0xc987, 0x1aba, 0xa54a, 0x745d, 0x74d1, 0xb184, 0xa12c, 0x2c52, 0xe656, 0x06d3,
    0x754c, 0xe333, 0x12e1, 0x0153, 0xed68, 0x1b83, 0x1536, 0xdc11, 0xc540, 0xc8d4, 0x94dc, 0x42ee, 0x8461, 0xf617, 0xa5f4, 0x5716,
    0x862c, 0x6819, 0x20b0, 0x81ea, 0x3353, 0xe17e, 0x73fc, 0x6df0, 0x7b19, 0x2b03, 0x1332, 0x6831, 0x88b4, 0x81a1, 0x1c40, 0xaebf,
    0xe4b2, 0x8d52, 0x9a10, 0x24ee, 0xf2c2, 0x165c, 0xda8e, 0x6e1c, 0x5147, 0x047a, 0x55eb, 0x8554, 0x201f, 0x21f6, 0xa35b, 0x1149,
    0xf95b, 0xfb1c, 0x0720, 0x179f, 0x4534, 0x1c66, 0x5ba6, 0xaf1d, 0x522c, 0x2ca1, 0x28a3, 0x4178, 0x1f42, 0x9ba5, 0x4479, 0x7b4c,
    0xfe04, 0x563f, 0x11dc, 0x3615, 0x227b, 0x806b, 0x518a, 0xd127, 0xe4d0, 0xb69f, 0x9376, 0xa6dd, 0xbb86, 0x36d3, 0x9fd0, 0x9057,
    0xcaa1, 0x5b6f, 0xbc55, 0x4116, 0xeb27, 0xb26f, 0x0c10, 0x1232, 0xb2a2, 0x1233, 0xa2a7, 0xa098, 0x8297, 0xaf99, 0x3858, 0xf171,
    0xeedb, 0x12f7, 0x1875, 0x8715, 0x10a5, 0x1c77, 0xed8f, 0xb0b5, 0x18c9, 0xc7b6, 0xce99, 0xb509, 0x3343, 0xaf80, 0xda5a, 0x3b76,
    0x1d67, 0x2649, 0xed28, 0xe9ff, 0x8f43, 0x1060, 0x8f11, 0x838e, 0x17d1, 0x0cce, 0x74ff, 0x7ce5, 0x675b, 0x62b0, 0x9db6, 0xef3c,
    0x3e3d, 0xcdc8, 0x8e38, 0xdf42, 0xdd4d, 0x6691, 0x5a80, 0x6e80, 0xd455, 0x9b4a, 0x6748, 0x1ee1, 0xa15e, 0x79d8, 0x003d, 0xcda4,
    0xd04b, 0x99ff, 0x4b81, 0xc017, 0xd0f0, 0x5e73, 0xd047, 0x2f9b, 0xe5ff, 0xb4d8, 0x514f, 0xb755, 0xf570, 0x5070, 0x23c1, 0x3faa,
    0xd311, 0xf909, 0x9c27, 0xbe63, 0xecd3, 0x097b, 0x46bf, 0x30f2, 0xa70a, 0xa3f1, 0x9d3c, 0xdb28, 0x67ae, 0xd01b, 0x78b4, 0x70b9,
    0x5bf9, 0x1cfb, 0xa1c8, 0xd8a1, 0x25a6, 0xf5bb, 0x4890, 0xc008, 0x781b, 0x7833, 0x265e, 0x214b, 0x845f, 0xe1db, 0x061a, 0xec13,
    0x6641, 0xb6df, 0x2c68, 0x8b4e, 0xd7b8, 0x9717, 0xbf9b, 0x2234, 0x364b, 0x8ce7, 0x7693, 0xdda6, 0xc4da, 0xd019, 0xe01d, 0x40f4,
    0xf130, 0x323b, 0x50fb, 0xa397, 0xfc1a, 0x8df9, 0xe680, 0xd00f, 0x423d, 0xf018, 0xdf2d, 0xe016, 0x8835, 0xe8a3, 0xe01b, 0x3236,
    0xa39c, 0x65e8, 0xa8d3, 0x845a, 0x3fcd, 0xcf2b, 0x00d1, 0xd89c, 0x7c46, 0xfd8c, 0x3ac8, 0x2c63, 0xd581, 0x4e3a, 0x72ec, 0xd014,
    0x4867, 0xe11e, 0x19cd, 0xca52, 0xb80c, 0xe633, 0x691d, 0xc00d, 0xd8a6, 0x92ac, 0x2762, 0x041b, 0xe227, 0xd67e, 0x3452, 0xc57a,
    0xbec6, 0x9aaf, 0xbf6c, 0x7df7, 0xe42a, 0x7e23, 0x2150, 0xed85, 0xf53e, 0xec18, 0x671d, 0x4926, 0x16da, 0x9b04, 0x53e7, 0x2ac1,
    0x4fb1, 0xe928, 0xcc60, 0x3fa2, 0xa477, 0x40f9, 0x80c0, 0x7453, 0x7d0e, 0x7e87, 0xddab, 0xf4a0, 0xff43, 0x8180, 0x849c, 0x9395,
    0x75ce, 0xe12e, 0xa05e, 0x2f7d, 0x8b53, 0x886a, 0x5cb2, 0xbf24, 0x0179, 0x82f1, 0xf8d2, 0x2239, 0xfe48, 0xc0bc, 0x4b7d, 0xf0c9,
    0xbf85, 0x6c44, 0xe9bb, 0xb29d, 0x7dfc, 0xc609, 0xbac0, 0x122d, 0xf9aa, 0x6bec, 0xa7e8, 0xed8a, 0xf77d, 0x6cbf, 0x47e0, 0xc7b1,
    0xbe40, 0x5cf8, 0xb041, 0x2276, 0xd5f2, 0x2ac6, 0xac92, 0xa6d8, 0xc949, 0x9ace, 0x492b, 0x289e, 0x6f1f, 0x3bb4, 0xa995, 0x1c61,
    0x6bbd, 0x482f, 0x6adf, 0x3e38, 0xa514, 0x3a52, 0x0420, 0xcd9f, 0x0c11, 0xc57f, 0x3400, 0x9db1, 0x4986, 0x68f9, 0x54fd, 0x2644,
    0xd9a8, 0x736f, 0xc013, 0xf56b, 0x3864, 0xecf1, 0x8714, 0xc012, 0xca57, 0xe073, 0xa752, 0x9c22, 0x1b03, 0x62ea, 0x6a60, 0xd016,
    0x3fa7, 0x9d9c, 0xf9cb, 0xc53b, 0x86b0, 0x98d1, 0xe93b, 0xdc0c, 0x02bf, 0x8684, 0xe5d2, 0xc982, 0x3378, 0x1b78, 0x9a6f, 0x7458,
    0xb45f, 0x939a, 0xeca1, 0x334e, 0x0904, 0xd33c, 0x4e8b, 0x682c, 0x007b, 0x13b7, 0x79c5, 0x55e6, 0xdde7, 0xdd72, 0xf4a5, 0x1657,
    0x15ac, 0x8ae9, 0x223e, 0xf7da, 0xefe8, 0xa1d0, 0xce0f, 0xc89a, 0xc963, 0xc25b, 0xe9ab, 0x9318, 0x3d4f, 0xf0ce, 0x25cb, 0x4bf2,
    0xdf0b, 0x83e6, 0x2616, 0xbf29, 0x3ff4, 0x0818, 0x3b33, 0xe5b4, 0x6aae, 0x2fcb, 0xabdf, 0xb526, 0x2f82, 0x0ca8, 0x4169, 0x3889,
    0x0be6, 0x7911, 0xc1c4, 0x9f97, 0x7667, 0x70b7, 0xed91, 0xa88c, 0x35b9, 0x7295, 0x6339, 0x2dc7, 0x4ad2, 0x278a, 0x2ead, 0xb58c,
    0x93c4, 0xdc5f, 0x5c47, 0x1bc6, 0xa5f2, 0x2a80, 0x111b, 0xe16f, 0xdf05, 0xd84d, 0xc462, 0xea17, 0x19eb, 0x2856, 0xefb6, 0x7d85,
    0xdb8f, 0xa2a0, 0x87b7, 0x8764, 0xa46a, 0xa8bd, 0x7830, 0x62e8, 0xe4e3, 0xa83e, 0x1e52, 0x0231, 0xfdf0, 0x5d58, 0x3b0c, 0x1787,
    0xfa2e, 0xf89e, 0xaa22, 0xadb1, 0x0590, 0x92a5, 0xc4d8, 0x3789, 0x6054, 0xc95c, 0x5629, 0x13d1, 0xb925, 0x8709, 0x7992, 0x9096,
    0x41f9, 0x0533, 0x30ee, 0x2006, 0xa0c3, 0x57ab, 0x2412, 0x0230, 0xfc19, 0x91c5, 0x29f7, 0xdd82, 0x2b64, 0xfc0d, 0x88f6, 0xfca4,
    0x23ac, 0xbe9e, 0x2707, 0xa26d, 0xd173, 0x1501, 0x280d, 0xbaec, 0x6d5b, 0xdb25, 0x3d01, 0xc931, 0x0674, 0x36b1, 0xfe9a, 0x4e68,
    0x8956, 0xfd79, 0xf4bd, 0x7a81, 0x7ed2, 0xac53, 0x2d23, 0x7429, 0x1680, 0x1a9c, 0xab3f, 0x6384, 0xbbd0, 0x643c, 0x1fba, 0x3114,
    0x6a41, 0xba9f, 0xea02, 0x1360, 0xb60c, 0xe6b1, 0x0d0a, 0xd8c9, 0x39f4, 0x1dfa, 0x2df7, 0x4b6d, 0x0dee, 0xcc03, 0x8d82, 0x2f0f,
    0x7f56, 0x08c7, 0xf2ae, 0x5d20, 0x8a89, 0x44fe, 0x5a44, 0xd0c0, 0x750a, 0xddae, 0xf47d, 0xb7b4, 0x0f06, 0x0c5d, 0x46bb, 0x3be3,
    0x9c48, 0x49ee, 0x994d, 0x687c, 0x2f50, 0xbe97, 0xfb91, 0xf080, 0xc4f3, 0xdc7a, 0x3a0f, 0x4e83, 0x1ea1, 0x0c78, 0xed5e, 0xa507,
    0xe37d, 0x985e, 0x0ba7, 0x9f7e, 0x0b83, 0x7c71, 0xe27d, 0x1234, 0x27de, 0x2341, 0x1e86, 0xcd21, 0xaf57, 0xb2dd, 0xa08e, 0x61e3,
    0x1907, 0x5727, 0xd796, 0xa58c, 0xd24e, 0xda05, 0x4759, 0x2b74, 0x5cc2, 0x619f, 0xf2b6, 0xac7d, 0x6d79, 0xca58, 0x78aa, 0x0e2a,
    0x33be, 0xb46b, 0x89d5, 0xa4ec, 0x6229, 0x0873, 0xc506, 0xa955, 0x8bf9, 0x3d30, 0x3bd7, 0xe96f, 0xc083, 0xd7d9, 0x7e19, 0x7713,
    0x6caf, 0xded9, 0xf630, 0xfd0c, 0x763e, 0x3c3f, 0xb394, 0xde3f, 0xb74f, 0x25e5, 0x7be9, 0x02f5, 0xede4, 0x8e9a, 0x5bef, 0x4cdc,
    0xa60f, 0x0495, 0x955f, 0xc692, 0xed43, 0x5e8e, 0x1f5d, 0xa0b3, 0x80db, 0xe139, 0x4258, 0xec2e, 0xabfa, 0xdd8d, 0x387f, 0x2291,
    0xdc81, 0x0766, 0xb841, 0x0c75, 0x44b1, 0x9b88, 0xefdb, 0xe328, 0x3f31, 0x00a3, 0xa156, 0x2b47, 0x76fd, 0xd2ba, 0x33f6, 0x19f1,
    0xb0cd, 0x82e0, 0x7674, 0x555e, 0xfbe6, 0xcb6a, 0x5e2a, 0x9f1b, 0x1e56, 0x1f61, 0x08d2, 0x761d, 0xb8c0, 0x4ba4, 0x9c2d, 0x7ef9,
    0x31e6, 0x67d6, 0x7039, 0x0c64, 0xf73a, 0x7245, 0xeccf, 0xdfce, 0x5031, 0x3532, 0x39b3, 0x89c8, 0x79c9, 0xbf9f, 0x7959, 0x447d,
    0x2bb7, 0x75dc, 0xa3aa, 0xf343, 0xd9b6, 0xf71d, 0x35da, 0xdf19, 0xeee9, 0x49d3, 0x2413, 0xd31f, 0x3a7f, 0xe4c0, 0x41a7, 0x079d,
    0x6b4b, 0xe959, 0x9d24, 0x4e2e, 0x6dcb, 0x778d, 0x5364, 0x3ca9, 0xc9cc, 0x1f1e, 0x1c94, 0xeb1a, 0xed00, 0x34ed, 0xd285, 0xd138,
    0x9932, 0x0125, 0x6449, 0x8ba3, 0x227d, 0x4c74, 0x8ad1, 0x1b25, 0x6933, 0x0f40, 0x4570, 0x1d26, 0x418e, 0x2907, 0x107e, 0x0049,
    0x06be, 0x39c3, 0xd0e3, 0x1804, 0xe236, 0xfcb8, 0xf89d, 0x6b4a, 0x244a, 0x72eb, 0x2d20, 0xa4ce, 0x9603, 0x3477, 0xf7ef, 0xab16,
    0x1915, 0x422a, 0x8407, 0xdc8f, 0x27a3, 0x6a4f, 0xfa3c, 0x6861, 0x41bd, 0xf538, 0x6b59, 0x1c9f, 0xc6a8, 0xbae6, 0x9ff5, 0x0f09,
    0xf52a, 0x1c11, 0xf2a1, 0x101b, 0x614f, 0x18a1, 0x6f81, 0x057f, 0x6ed5, 0x3418, 0xc1ee, 0x971a, 0xf759, 0xae84, 0x7619, 0x3176,
    0x3346, 0xb1bc, 0xb3a1, 0xf8da, 0xda69, 0x01da, 0x6821, 0x0fbd, 0xc8e0, 0x9a5b, 0x4cfb, 0x70ef, 0x8acf, 0x97a9, 0xe703, 0x2613,
    0xf465, 0xee02, 0x2f35, 0x9281, 0xf720, 0x4f4e, 0x94f9, 0x55c5, 0xde2c, 0x0e22, 0x5f6f, 0x463d, 0x4a38, 0xa102, 0xe873, 0xf43b,
    0xc1b7, 0xf1cf, 0x04b9, 0xe731, 0xd5bf, 0xc337, 0xb2a3, 0xc125, 0x7b8c, 0xd1d3, 0x1207, 0x31a2, 0x9a96, 0x4188, 0x7665, 0x9134,
    0xc69a, 0x04a9, 0x08ce, 0x7069, 0xabd3, 0xbe7c, 0x6984, 0x7d3e, 0x1dbd, 0x1279, 0x7c80, 0xd887, 0xe074, 0x1de6, 0x8026, 0x7c6f,
    0x257d, 0xd4ce, 0x0e37, 0x476d, 0x82d4, 0x3f75, 0x8baf, 0x0f74, 0xb724, 0x30e1, 0x1da0, 0xa69d, 0xf356, 0xaa08, 0x084e, 0x8a4c,
    0x43bf, 0x873e, 0x0683, 0xadda, 0x9994, 0x8374, 0x7769, 0xf4e8, 0x2d42, 0x69d4, 0x0977, 0xae73, 0xfb76, 0x8777, 0x1aef, 0x96db,
    0x64cb, 0x9b42, 0x91ac, 0x26d1, 0xedea, 0x1c68, 0x654c, 0xa104, 0x00bb, 0xab84, 0x2db3, 0xacfc, 0x1ac9, 0x6d12, 0x96f9, 0x272a,
    0x0efb, 0x5339, 0x5933, 0x9767, 0x48da, 0x8274, 0xe74b, 0x8055, 0xbe74, 0x5805, 0x6c95, 0xf065, 0xc9f9, 0x8fce, 0x758f, 0xc02c,
    0x0a98, 0x9708, 0xb972, 0x14c6, 0xbce8, 0x40aa, 0x4636, 0x544a, 0xf462, 0xdae0, 0x1c8d, 0x93ef, 0x5420, 0x0947, 0x018f, 0x23d4,
    0x52ed, 0x46e8, 0x39ed, 0x0d33, 0x45a8, 0x8d3a, 0xf6e9, 0xa4bc, 0x96b3, 0xcbc7, 0x11a1, 0xfcdd, 0x1d14, 0x20f1, 0x25de, 0xcb26,
    0x4716, 0xf067, 0xd4ad, 0xc019, 0x951f, 0xa48b, 0xd30d, 0xcf6b, 0x4523, 0x57ac, 0x8eb0, 0xfa7a, 0xa7af, 0xeb08, 0x31fc, 0xb799,
    0x760b, 0xa7dc, 0x42ae, 0xe237, 0x0b25, 0x3556, 0x7dca, 0x60b7, 0x596f, 0x92ca, 0x9c1c, 0x89b6, 0x0d1a, 0x68b2, 0xd248, 0x0827,
    0x10e7, 0x1c05, 0xb7e9, 0x0516, 0xa68b, 0x8c25, 0x74ef, 0xc5c4, 0x90c6, 0x4730, 0x0b98, 0x58ec, 0xd1c8, 0xf93e, 0x7ef5, 0xae61,
    0x4971, 0xc30f, 0xacea, 0x01a3, 0x00e9, 0x20d2, 0xd52e, 0x846e, 0x2306, 0xf053, 0xd95f, 0xe907, 0x5ec9, 0x3203, 0x30d0, 0x609f,
    0xcf07, 0xdd93, 0x946c, 0x462b, 0x7958, 0x7d84, 0xf675, 0x20f0, 0x70dd, 0xdfdd, 0x6640, 0x2bd9, 0x8c4a, 0x36bd, 0x9f59, 0xc798,
    0xae76, 0x554e, 0x72d6, 0xf978, 0x2348, 0xd875, 0xd076, 0xf4ba, 0x0e58, 0xdcd1, 0x5dcd, 0x1415, 0xe52c, 0x8ff7, 0x3190, 0xc0e5,
    0x2db5, 0xb7dc, 0x9c29, 0x406e, 0x1b67, 0xb9e7, 0x88eb, 0x78c3, 0x7197, 0xe56e, 0xd2f7, 0xea05, 0x40ce, 0xc42d, 0x9055, 0x0ee2,
    0x77e8, 0xe7d0, 0x709d, 0xc3c7, 0x46a0, 0x16f4, 0x021f, 0x2fa8, 0xed30, 0xa28b, 0x255a, 0xf5e7, 0x694d, 0x13bf, 0xc6e9, 0x931b,
    0x78e5, 0xd5fd, 0x3b30, 0xe40e, 0xd07e, 0xa099, 0x1798, 0xc91f, 0x1cdf, 0x07c4, 0x7bf5, 0xa4d6, 0xdd70, 0xdddf, 0x4201, 0xae09,
    0x6ec7, 0x4b5b, 0x4faa, 0x3bc8, 0x18ff, 0x414d, 0xd672, 0x78f9, 0xf3e5, 0x5e9d, 0x6372, 0xdd38, 0x6eed, 0xfe46, 0x9d95, 0xa753,
    0xc8aa, 0xe5e6, 0x01b0, 0x399b, 0x7250, 0xac6b, 0x6978, 0x1f99, 0x3304, 0x4a3e, 0x8aab, 0xf329, 0x5a78, 0xc045, 0xcd0f, 0x8eaa,
    0x61ec, 0x19fa, 0xb595, 0x4e71, 0x2733, 0x7c78, 0x0052, 0x4486, 0xb7a2, 0xc0ee, 0x0eeb, 0xaee5, 0xdcf4, 0x95a6, 0xd771, 0xaedc,
    0x264d, 0x3892, 0xec1c, 0x2aca, 0x3fb3, 0x3b7f, 0x06dc, 0x09cf, 0xb965, 0x2b35, 0xf905, 0xd5d4, 0xae42, 0x37e2, 0x3988, 0xb015,
    0x970c, 0xc049, 0x7f45, 0x574a, 0xe95d, 0x8fd2, 0x2345, 0xac57, 0xc0ad, 0xbe0e, 0xca9b, 0x89fd, 0xd4b4, 0x0c42, 0x912e, 0x02e3,
    0x199f, 0xaa63, 0x4388, 0xb13c, 0x7cab, 0x7e36, 0xbda3, 0x35d8, 0xd093, 0x519e, 0x68ea, 0xe1d8, 0xf256, 0xf272, 0x08a2, 0xcf40,
    0x8825, 0x2e3b, 0xbc31, 0x6574, 0x1b96, 0x1635, 0x0fbb, 0x5d05, 0x73b5, 0xaa72, 0xb8bc, 0xbdc6, 0xf676, 0x9f49, 0xf24c, 0x7dd1,
    0xf037, 0xad90, 0x3832, 0x96e6, 0x99a0, 0x7ed0, 0x1307, 0x5e7e, 0xa0c4, 0x70ff, 0x45cf, 0x5404, 0xfa92, 0x4a7e, 0x98b8, 0xee9d,
    0xf293, 0x23da, 0xfcb9, 0x568f, 0x0871, 0x9627, 0x572e, 0xc298, 0xa064, 0xcd4b, 0xa034, 0xebb2, 0x3761, 0x177c, 0x53a7, 0x959d,
    0x7fea, 0xc453, 0x7edd, 0x63a6, 0x2a55, 0xa2eb, 0x53f2, 0xd497, 0xa1f7, 0x2d04, 0x1a18, 0x8b48, 0x437b, 0xeba0, 0x093d, 0x19e5,
    0xe1c6, 0xa8ed, 0xb13a, 0x949d, 0xc31b, 0x5746, 0x9695, 0x6abb, 0x35f4, 0x08ac, 0x2934, 0xbdb4, 0xfeee, 0x86eb, 0x22fc, 0x0edf,
    0x8e81, 0x264b, 0x84dc, 0x69d6, 0xe302, 0x2e91, 0xa93f, 0xca25, 0xcebd, 0x915c, 0x9dc2, 0x9dd4, 0x8ef3, 0xd5f5, 0xc915, 0xdceb,
    0x1c03, 0x7f9e, 0xbe5f, 0x0b67, 0x70b6, 0xfbe5, 0x5449, 0xbda2, 0x074a, 0x278d, 0x5d5e, 0x265d, 0x8b36, 0xf03a, 0x7f3b, 0xb33f,
    0xbc3c, 0x360a, 0xd5c2, 0xd361, 0x430d, 0x170a, 0xe571, 0x738c, 0x58fc, 0x89eb, 0xb48c, 0xd0a5, 0x110b, 0x7f0f, 0x532f, 0x9f15,
    0x300f, 0x37b8, 0x411e, 0x005e, 0xf317, 0x607a, 0xccbe, 0xca5f, 0x9b75, 0x7f41, 0xfb49, 0xb14e, 0x84ed, 0x3515, 0xd5b5, 0xaed3,
    0xb689, 0x1c9c, 0x63a8, 0xc20d, 0xa2a8, 0xdd26, 0x53b1, 0xb8d8, 0x4954, 0xa2bd, 0x39dc, 0xf25e, 0x5a29, 0x7469, 0xa4c4, 0xd9fd,
    0x6141, 0x0d65, 0xf38e, 0xf5d5, 0xde5d, 0xdbcd, 0x13af, 0x6493, 0xe9f3, 0x4c23, 0x67f0, 0x1647, 0xffb0, 0xd560, 0x9c23, 0x3ab2,
    0x3e3f, 0x4d43, 0xb726, 0x52ae, 0x4a17, 0x44e3, 0x2c03, 0xe8f5, 0x6048, 0x5759, 0xa9d2, 0x99b2, 0x58da, 0x269a, 0x7c67, 0xd768,
    0xc176, 0x1403, 0x9609, 0x538e, 0xb403, 0xd3b4, 0x4ba0, 0xdf3a, 0x20e5, 0x31c8, 0x2bc7, 0xeeaf, 0x9bc7, 0x8db4, 0xdc77, 0x66db,
    0x93dd, 0x07cf, 0x8a6e, 0x1810, 0xc7e7, 0xa869, 0x12c2, 0x6177, 0x92fa, 0x7e4a, 0xdf90, 0xfccb, 0x4433, 0x6b8b, 0xb582, 0x5d31,
    0x0571, 0x478c, 0x2e57, 0x98c2, 0x4df6, 0x64fd, 0xfa68, 0xb719, 0x7f8f, 0xc369, 0x1514, 0xcd5d, 0xb32b, 0x89a4, 0x3cf7, 0x6ce3,
    0x7fe9, 0x1c04, 0x6448, 0x2005, 0x788f, 0xa226, 0xe004, 0xa004, 0x90e4, 0xb88f, 0xc385, 0x420b, 0xe226, 0x2c51, 0xe81e, 0x5f17,
    0x2139, 0xad78, 0x6005, 0x511a, 0x5de5, 0x40ba, 0x1fce, 0xa448, 0x5c04, 0x85a7, 0x15d4, 0xdd94, 0x5634, 0xbfe9, 0x7ab1, 0x1f90,
    0xcce6, 0x2227, 0x356b, 0x0e0f, 0x6c51, 0xa529, 0x6f9a, 0x5874, 0x666a, 0xdc2f, 0xf48e, 0x281f, 0x636a, 0xab3c, 0x9f17, 0x2007,
    0xf88f, 0xfefb, 0x6647, 0x1e26, 0x9fb6, 0xd0e4, 0x66cb, 0x4914, 0x0264, 0x8879, 0x820b, 0x36c3, 0x0409, 0x3cd3, 0x50a8, 0x0386,
    0x858f, 0x28bd, 0x911a, 0x288c, 0xea40, 0x7d79, 0xa706, 0xa005, 0xed78, 0x32dd, 0x6d5e, 0xbbe2, 0xbf30, 0x6139, 0xfbe8, 0x696f,
    0x59b6, 0xf78c, 0xde29, 0x5fce, 0x9914, 0x9c10, 0xe448, 0x9803, 0x1a96, 0x9de5, 0x6703, 0x743b, 0x80ba, 0xd804, 0x9d9f, 0x2e73,
    0xc5a7, 0xc0a9, 0xfdc9, 0x4f6b, 0xc970, 0x9c04, 0xf2d5, 0xc62a, 0xe94c, 0x442d, 0x1d95, 0x2e09, 0x37a2, 0xca3d, 0x4a9b, 0x55d4,
    0xfcaa, 0x9634, 0x9306, 0x4298, 0xffe9, 0x28ed, 0x04dc, 0x8b66, 0x910a, 0xb514, 0x24c4, 0xbab1, 0xe047, 0xb1c7, 0x5f90, 0x4d5d,
    0xf094, 0xa36a, 0x25bc, 0x963c, 0xeb3c, 0xee5e, 0x0ce4, 0x42dc, 0xb61f, 0x2925, 0xa3ed, 0xdf17, 0xb172, 0x4aba, 0x6007, 0xd5b7,
    0x1c30, 0x8542, 0x5e32, 0xf67c, 0x2c8b, 0xa66a, 0x17c9, 0x285e, 0xf29b, 0x6162, 0x681f, 0x1bd8, 0x21f0, 0xfa82, 0xcf51, 0x348f,
    0x5d4d, 0x905f, 0xc6be, 0xaf9a, 0x7e04, 0x7b1c, 0x9874, 0xc115, 0x0461, 0xac51, 0x235b, 0x2ebf, 0xe529, 0xbe0a, 0xebc8, 0x6af0,
    0x06b0, 0x533c, 0x4e0f, 0x65b4, 0x3f85, 0xdcf7, 0xeade, 0x756b, 0x6227, 0x1b04, 0x049c, 0x70c9, 0xf81a, 0x0ce7, 0x5f2d, 0xac62,
    0xc879, 0x5528, 0xb743, 0x3670, 0xd54f, 0x4264, 0x5856, 0xaa49, 0x4d88, 0xdb16, 0x76c3, 0x05a2, 0xfffc, 0x90f9, 0x1945, 0xc20b,
    0x641e, 0x4409, 0x0c36, 0x532c, 0x7cd3, 0xc3a2, 0x5ca7, 0x1eb0, 0xd28b, 0xf858, 0x73e9, 0x90a8, 0x4414, 0x21b2, 0x4386, 0x1ecf,
    0x29a5, 0x516c, 0x5e26, 0x4b21, 0x3ad5, 0xb4f7, 0x4211, 0xa647, 0x3efc, 0xaf2c, 0xba1a, 0x87c9, 0x118d, 0x3890, 0xa086, 0x7247,
    0x17f6, 0x6184, 0x33d2, 0xa6cb, 0xc6f3, 0xc803, 0x8914, 0xf9c3, 0x4166, 0xdfb6, 0x8603, 0xa850, 0x10e5, 0xec7b, 0x064f, 0x155a,
    0x7f9f, 0x1031, 0x9fce, 0x3039, 0xdf60, 0x78c0, 0x155e, 0x1e2a, 0x378d, 0x2b4b, 0x9138, 0xdc93, 0x35dc, 0x99b6, 0x931f, 0x01a7,
    0xe906, 0x2933, 0xdb24, 0x2449, 0x32eb, 0x5603, 0xd803, 0xb89d, 0x2a4f, 0xd914, 0xcf08, 0x2b59, 0xdc10, 0x214f, 0x571a, 0x3619,
    0xdde5, 0xddbc, 0x3d3e, 0xc8cd, 0x91d3, 0x5a96, 0xa731, 0x72a3, 0x0f4e, 0xb465, 0xb43b, 0x1f6f, 0x71bc, 0x9a69, 0x30ef, 0xa703,
    0x2d12, 0xc0ba, 0x6104, 0x51ac, 0x1805, 0x89f9, 0x5767, 0xa74b, 0xff74, 0xe57c, 0x4a4c, 0xdd9f, 0x473e, 0x5994, 0x6e73, 0xdaee,
    0xf6b0, 0x2d5b, 0x7aec, 0xe706, 0x51c5, 0xeb63, 0xe005, 0xe411, 0xa6b1, 0x2a41, 0xef0e, 0xedf6, 0xbd79, 0x3ed2, 0x2384, 0xdfb9,
    0xe789, 0xf5b8, 0x688c, 0x81c4, 0x984d, 0xd9ea, 0xdbc5, 0xd11a, 0x68bd, 0x9b8f, 0xd786, 0xde51, 0xb89e, 0xc58f, 0xd3d0, 0x3992,
    0x92ba, 0xff30, 0xa328, 0x7841, 0xa139, 0x6bfa, 0x8692, 0xdf5c, 0xfc3e, 0x2caf, 0x0cdc, 0x3be9, 0x746b, 0x2229, 0xa96f, 0x3e19,
    0x72dd, 0xe7dd, 0xd233, 0xcba6, 0x219f, 0x2d79, 0x658c, 0x0759, 0x04fe, 0x3f56, 0xfbe2, 0xb47d, 0x09ee, 0xef4f, 0x0e83, 0xad5e,
    0xf514, 0x5b75, 0x8a5f, 0x011e, 0x49eb, 0xd10a, 0x9361, 0xa571, 0x9bcd, 0x2141, 0xfab1, 0x27f0, 0xdc9b, 0x62a8, 0xb25e, 0x64c4,
    0xe699, 0x2048, 0xa8f5, 0x7726, 0xf1c7, 0x5bc7, 0x138e, 0x0ba0, 0x6869, 0x53dd, 0x1d31, 0x9f90, 0x078c, 0x0df6, 0x8d5d, 0xfcf6,
    0xd77b, 0x6064, 0x8298, 0xbcb9, 0x30ff, 0xba92, 0x56e6, 0xd306, 0xd634, 0x4825, 0x3dd1, 0x78bc, 0x6a63, 0x3cab, 0xa1d8, 0xc8a1,
    0x95f5, 0x8ebd, 0x8a25, 0x44dc, 0xe78c, 0x4b36, 0xcb66, 0x1449, 0x62eb, 0x3fea, 0xd9e4, 0xda17, 0x68ed, 0x831b, 0x7db4, 0xe2fb,
    0x55a6, 0x77a2, 0x0486, 0x7595, 0x0a3e, 0x1a78, 0xf99a, 0x2978, 0x4fd2, 0x570c, 0xc2e2, 0x8a9b, 0xf891, 0xffb2, 0x95d4, 0xf987,
    0x842d, 0x3197, 0x38c3, 0x5c29, 0x628b, 0x294d, 0x83c7, 0xc21e, 0x6099, 0x38e5, 0x6e09, 0x3bf5, 0x0b5b, 0xd8fe, 0x9d38, 0x5d95,
    0x4ff7, 0xce57, 0xb4ba, 0x32d6, 0x9fdd, 0x4c4a, 0x062b, 0xb675, 0xe0d1, 0x0971, 0x209f, 0x995f, 0xdc04, 0x668b, 0x18ec, 0x3ef5,
    0xab08, 0x0523, 0x8f6b, 0x94ad, 0x52ca, 0xcd19, 0xa237, 0x3dca, 0x00aa, 0xca97, 0xe3d3, 0xdc8c, 0x06e8, 0x05a8, 0xbcdd, 0xe5dd,
    0x1b23, 0x252a, 0x9117, 0xbe60, 0xfe0a, 0x02df, 0xf008, 0xfc52, 0x64af, 0x0199, 0xe44a, 0x2bc9, 0x847f, 0x6b91, 0xaaf0, 0xf150,
    0xec51, 0x654a, 0xdab9, 0x3955, 0x88d4, 0x4461, 0xc152, 0xd535, 0xa17e, 0x462c, 0x6ebf, 0xd331, 0x4d52, 0xb2c2, 0x4554, 0x635b,
    0x6f80, 0xd8c8, 0x70b5, 0xd874, 0xd232, 0x4297, 0x0116, 0xcc0f, 0x406b, 0xbe04, 0x5057, 0x5376, 0xbb1c, 0x0534, 0x0178, 0x0479,
    0x1070, 0xa5ff, 0xef9a, 0x0b81, 0x63f1, 0x27ae, 0x7e63, 0x06bf, 0xd05f, 0xdd66, 0xaf3c, 0x34ff, 0x8dc8, 0x9d4d, 0xdee0, 0xc03c,
    0x5b04, 0xb53e, 0xad85, 0x7f6c, 0x52ac, 0xa227, 0x8a52, 0x291d, 0x486a, 0x35ce, 0xb0c9, 0xb8d2, 0xa928, 0x6477, 0xb4a0, 0x449c,
    0xa1db, 0x381b, 0x8008, 0x61c8, 0x4ce7, 0x84da, 0x4b4e, 0x7f9b, 0x4df9, 0xb130, 0xf235, 0x9f2d, 0x25e8, 0xffcc, 0xec62, 0x32ec,
    0xcca7, 0x2aae, 0xa5b4, 0xe615, 0x825b, 0xfd4e, 0xb7da, 0x8e0f, 0x933c, 0x745f, 0xd656, 0x39c5, 0x5d9c, 0x46b0, 0x8982, 0x5a6f,
    0x28f9, 0xcc10, 0x8d9f, 0x2adf, 0xa073, 0xdb02, 0xb56b, 0x4714, 0x8609, 0x7f85, 0x87b1, 0x67e8, 0x1cf8, 0x95f2, 0xe89d, 0x6995,
    0xf592, 0x2326, 0x2368, 0x4ce4, 0xa7cf, 0x308d, 0x82dc, 0x0ab8, 0x696d, 0x2b3d, 0x1a59, 0x6ee7, 0x2e5f, 0xb985, 0x7270, 0xda26,
    0xb34b, 0x205c, 0xd63c, 0xc196, 0x9fc1, 0x591c, 0xa2c8, 0x65bc, 0xe36a, 0xa084, 0x1bb6, 0x102d, 0x439b, 0x3095, 0x0837, 0x8ea1,
    0xed20, 0xf172, 0x1cb8, 0x3206, 0x8aba, 0x6953, 0x27c3, 0xf52d, 0xe2ca, 0xbe94, 0x99b4, 0xa007, 0x8aef, 0x79b5, 0x15b8, 0xc1d7,
    0x6925, 0xc513, 0xd26e, 0xb4db, 0xac1a, 0xf61f, 0xd966, 0x33de, 0x0694, 0x765d, 0x1f18, 0x6a61, 0xde91, 0xe503, 0x7687, 0xe3ed,
    0xf83a, 0x02b7, 0x367d, 0x1c50, 0xce74, 0x4da8, 0x3af5, 0x9e32, 0xc542, 0x912a, 0x9934, 0xe248, 0xe246, 0x5c30, 0x9b36, 0xcd06,
    0x27f6, 0x2a6f, 0x1825, 0x57c9, 0x748b, 0x9a25, 0x685e, 0xf6d0, 0x0b7b, 0x6c8b, 0xb073, 0xab28, 0xe66a, 0xd654, 0x4a0b, 0x49c4,
    0xa162, 0x9548, 0xb810, 0xf9ae, 0x9eb5, 0x329c, 0xea31, 0x7afb, 0x1e6b, 0xcb60, 0x5bd8, 0x645b, 0x16a8, 0x5541, 0x78b0, 0xa81f,
    0x1d18, 0x61f0, 0x4311, 0xa1fb, 0x3a83, 0x64cf, 0xd252, 0x39f8, 0xe04b, 0x06b4, 0x9fe1, 0x0f52, 0xe266, 0x7adf, 0x748f, 0xa182,
    0x1fb7, 0x4145, 0x0b68, 0x3035, 0x41b6, 0x8166, 0xbc14, 0xcd7c, 0x30da, 0x302b, 0xe850, 0xf477, 0x9ae3, 0x9661, 0xfb06, 0xc603,
    0xb7ad, 0x50e5, 0xeb6e, 0x2129, 0x2c7c, 0x45e9, 0x4a84, 0xdea2, 0x946d, 0x9e4e, 0x9ed4, 0x464f, 0x1e4b, 0xde12, 0x555a, 0x7552,
    0x23cd, 0xd473, 0xe6cb, 0x11f4, 0x4cbd, 0x7c56, 0x03ba, 0x73d2, 0xa184, 0x101d, 0xc1d4, 0x6833, 0x41fa, 0x57f6, 0x297f, 0x32fb,
    0x643b, 0xc6a7, 0xc797, 0xc914, 0x442c, 0xfc3d, 0x39c4, 0x0147, 0xeb99, 0x06f4, 0xcf3a, 0x97bb, 0x0804, 0x9359, 0x81e9, 0xcc5f,
    0xcd75, 0x518d, 0x4b43, 0xea9e, 0x7890, 0x8a0e, 0xc744, 0x27d2, 0xffeb, 0x7f91, 0x0a79, 0xe086, 0xe262, 0x77ba, 0xb247, 0x14ec,
    0xef2c, 0xd4b0, 0x3387, 0xc2cb, 0x9eae, 0x7efc, 0x9e58, 0xc421, 0xa220, 0x910d, 0xc7c9, 0x7d50, 0xb16a, 0x7eff, 0x5604, 0xfa1a,
    0x3aaa, 0x343f, 0x0e6c, 0x8211, 0xc5a0, 0xc84c, 0xe647, 0x5e1a, 0x5521, 0x7ad5, 0x0148, 0x1219, 0xf4f7, 0xca8c, 0x48e6, 0x434f,
    0x0117, 0x69e1, 0x8b21, 0x065a, 0x1547, 0x8fad, 0x67aa, 0x9e26, 0x916c, 0xe2c0, 0x9ccc, 0xf1e1, 0x3d37, 0x69a5, 0xcb92, 0x4a35,
    0x7adb, 0x0e55, 0x932c, 0x719f, 0xfec3, 0x5583, 0x0066, 0x4c36, 0x8409, 0x78b2, 0x55ed, 0xb736, 0xc33f, 0xa41e, 0x749b, 0x8aa2,
    0x26e6, 0x0ad5, 0xb6cb, 0x9ca7, 0x708e, 0xeac8, 0x5eb0, 0x9ebd, 0x5714, 0xbcd3, 0x850e, 0x477f, 0x03a3, 0x0c3e, 0xe362, 0x4ec5,
    0x3859, 0x6b17, 0x319a, 0xe58d, 0xe4ab, 0x128c, 0xe269, 0x7aa6, 0xcdc1, 0x1027, 0xd0a8, 0x1b01, 0x9e95, 0xb6b4, 0xe280, 0xb3e9,
    0x226f, 0x8414, 0xd4e6, 0x2a8b, 0x61b2, 0x0330, 0xfd31, 0x3241, 0x4b11, 0x9843, 0xd017, 0x8386, 0xa8cc, 0x4f7f, 0x5ecf, 0x582f,
    0x3108, 0x52d3, 0xdf69, 0x9856, 0x3ade, 0x3f8e, 0xea49, 0x5dee, 0x4cc6, 0x1550, 0xfecc, 0xedfc, 0x8264, 0x63fa, 0xce7d, 0x9fca,
    0x0b8c, 0x44ba, 0x7670, 0xd17c, 0xedf3, 0xabdc, 0x2286, 0xf743, 0x9528, 0x2351, 0x1b70, 0x273c, 0xe30b, 0x087a, 0x4a20, 0xf320,
    0xa51d, 0x3ffd, 0x25af, 0xe433, 0xd0f9, 0x10ae, 0xb08f, 0x2b0f, 0x7e4c, 0x9c06, 0x839d, 0x5945, 0x331a, 0x10d6, 0x020c, 0x71e8,
    0x1b17, 0x762a, 0x0d58, 0xaccb, 0xb7f0, 0x8d88, 0x7f2b, 0x9f63, 0xff11, 0x7fdf, 0x45a2, 0x5817, 0x06fe, 0xb215, 0xb489, 0xb6c3,
    0x186f, 0x1d71, 0x0134, 0xe37b, 0x1de0, 0xf440, 0xfbfe, 0x8ff8, 0xe8b7, 0xa563, 0x4642, 0x8201, 0x5301, 0xe112, 0xee09, 0x4fef,
    0x47c4, 0xfb5e, 0x790f, 0xa86f, 0x9286, 0x5cdf, 0x5d74, 0x4aa5, 0x0ab5, 0x5a39, 0xe4d6, 0x55ca, 0x1f28, 0x8ef4, 0xa625, 0xbbf5,
    0xa2f6, 0x91aa, 0xd296, 0x5798, 0x9c96, 0x36ff, 0x0920, 0x0fc2, 0xf8df, 0x107f, 0xe496, 0x1c26, 0xe099, 0x27fc, 0x0eba, 0xb437,
    0x8ba1, 0xe0c1, 0x240f, 0x4e69, 0xb6ab, 0x5969, 0x70f4, 0x7b30, 0x15fe, 0x2618, 0xe649, 0x425a, 0x672c, 0xb8e5, 0x5242, 0xddd6,
    0x9e9d, 0x9139, 0x5f9a, 0x784c, 0x0cb8, 0x33e6, 0x092e, 0x951d, 0x29dc, 0x49dd, 0x1d39, 0xa965, 0x0b3e, 0xabd0, 0x31a7, 0xa372,
    0xe736, 0xaeed, 0x31c0, 0xe7f9, 0x3e47, 0x9459, 0xb9e5, 0x60fe, 0x0f7a, 0x7b53, 0x668d, 0xdd95, 0x3496, 0xaafc, 0xe753, 0xc12a,
    0x9a21, 0x5b5c, 0x7bc8, 0x7d43, 0x9e8c, 0xa93d, 0x33d8, 0x8faa, 0x8b5b, 0xd584, 0x1dcc, 0x0a34, 0x706e, 0xaec7, 0xba12, 0xdd67,
    0x3f67, 0x38c6, 0xd88c, 0x1673, 0xe8f3, 0xa185, 0xb8f9, 0x8bd6, 0x0292, 0x58ff, 0xf8e6, 0x203e, 0x814d, 0x7c74, 0xc5d8, 0xd865,
    0x85bf, 0x446c, 0xf06a, 0xc8eb, 0xe342, 0x6b1d, 0xb8c3, 0x1880, 0xb062, 0x5b67, 0xbab4, 0xd632, 0xf9e7, 0xc031, 0x9e5b, 0x0fe6,
    0xaa00, 0x97ca, 0x806e, 0x805a, 0xb3e0, 0xbd0a, 0xdd49, 0xdc29, 0xf7dc, 0x853f, 0x2b49, 0x9e28, 0x976c, 0x6db5, 0x0918, 0xae00,
    0x26d6, 0x80ce, 0xe68e, 0x72c0, 0x042e, 0x6bbe, 0x9e8f, 0xce1d, 0x0c1e, 0xba18, 0xfbb0, 0xd055, 0x7487, 0x740a, 0x4ee2, 0xa109,
    0x256f, 0x272f, 0xc261, 0x496e, 0xb032, 0xb197, 0x353c, 0x2160, 0xbbe0, 0xbb09, 0x2a06, 0x46a6, 0x13ed, 0xfbf2, 0xad01, 0x12f8,
    0xc579, 0xe655, 0x03c8, 0xf3c6, 0xe277, 0xad29, 0xa6a2, 0xb09d, 0x27d1, 0x8a51, 0xeb62, 0xea3f, 0x63a5, 0xb7e8, 0x0124, 0x41f8,
    0x9882, 0xb9bc, 0xa59b, 0x421f, 0x88db, 0xf2e3, 0x6fa8, 0x0f79, 0x4772, 0x86a0, 0xa73f, 0x9c9d, 0x56f4, 0xd81d, 0xa41c, 0x0639,
    0xe28b, 0x4afb, 0xadbc, 0x1f6b, 0xaddf, 0x2d31, 0x783e, 0xec9e, 0x9da9, 0xfa4a, 0x35e8, 0xf4ed, 0xb2b1, 0x8980, 0x277a, 0x655a,
    0x475f, 0xa94d, 0x1315, 0xfc89, 0x53bf, 0x96e0, 0x9210, 0x12d0, 0x17a6, 0xdf78, 0xae78, 0x06ea, 0xcd04, 0xf683, 0xd31b, 0xa8ae,
    0xfe0e, 0xc546, 0x03a7, 0xef30, 0x1809, 0x00ae, 0xe52d, 0xc5ab, 0x7ed6, 0x27e2, 0xc9fd, 0x6b4f, 0xc31f, 0x9b79, 0x5a7c, 0x0a9c,
    0x0a91, 0x14b5, 0x85ed, 0x5021, 0x4c42, 0xab1b, 0x50b2, 0x6355, 0xf989, 0x0518, 0xa4d3, 0xd12e, 0xd5f6, 0xf542, 0x42e3, 0x1d6b,
    0x8a82, 0x6e3f, 0x974a, 0xd160, 0xcdb8, 0x47d3, 0x1d2b, 0xbf45, 0x004a, 0x004e, 0x8151, 0x2573, 0xa8b6, 0xd70c, 0xcc29, 0x1cd6,
    0x1d92, 0x1ede, 0xfe9b, 0x6345, 0x685a, 0xe2a4, 0xec57, 0x1b2a, 0x8ba8, 0x295e, 0x58a5, 0x4f44, 0xcfd2, 0x14d3, 0x41de, 0x527d,
    0xdc94, 0xee42, 0x792d, 0x9f21, 0x77e2, 0x29ad, 0x19be, 0xadfe, 0x3422, 0x9bbf, 0x6402, 0x7988, 0x9a62, 0xfa59, 0xf015, 0x6866,
    0x6b35, 0x0f0e, 0xdbe1, 0x5f84, 0x55cd, 0xf965, 0x5240, 0x1feb, 0x193e, 0x6fa9, 0x15d5, 0x637a, 0x24a8, 0x307d, 0x1ca4, 0x3906,
    0x5152, 0xeec8, 0x971f, 0x46dc, 0x6454, 0x08a9, 0x49cf, 0xe80e, 0xb0c2, 0x7fb3, 0x0dae, 0x2f46, 0x7b7f, 0x317b, 0xd060, 0xbb55,
    0x30d3, 0xd39e, 0x6aca, 0x0584, 0x101e, 0x723f, 0x80fd, 0x2c1d, 0x7892, 0x8bfb, 0x5660, 0xb461, 0x1020, 0x664d, 0x5c6a, 0x07bb,
    0x6f18, 0x711d, 0x8e71, 0x3cae, 0xd09f, 0x5790, 0xbd8e, 0xf595, 0x59fa, 0x629a, 0x8ce5, 0xb71c, 0x4e33, 0xa1ec, 0xe510, 0x7bec,
    0x717f, 0x4f12, 0xeb1f, 0x4052, 0x1142, 0x47a6, 0x8486, 0xbf02, 0x0036, 0x6733, 0xd6e4, 0xca55, 0xbc78, 0xd13d, 0x3445, 0x661c,
    0x00ef, 0x07a2, 0xa0a8, 0xee6a, 0x4830, 0xf7a2, 0x0b30, 0x63dd, 0x42ec, 0xf01e, 0xeee5, 0xceb3, 0xe75c, 0xee12, 0xd324, 0x4eeb,
    0xf348, 0x1cf5, 0x4ee8, 0x59ee, 0xd5a6, 0x2ea7, 0xbdda, 0x0f4a, 0xacec, 0x9d3a, 0xa6e4, 0x1772, 0x7abb, 0x1a07, 0xeedc, 0xdf1e,
    0x8d66, 0x95dd, 0x6e7c, 0xa978, 0x438f, 0x6010, 0x5f99, 0x9f20, 0x5563, 0xb250, 0x5ed8, 0x0215, 0xec6b, 0xaaf9, 0x7498, 0x15c1,
    0xed67, 0x7e22, 0x799b, 0x1fc3, 0x1af8, 0xe70c, 0x7622, 0x41b0, 0x25e7, 0x7efe, 0x9d9e, 0x3991, 0x2305, 0x08ab, 0x3d00, 0xa4cd,
    0xa99e, 0x9a78, 0x72f5, 0x84a5, 0x0046, 0x4482, 0xa364, 0x315a, 0xe18b, 0xe828, 0x89cd, 0x0d10, 0x23f7, 0x01e1, 0xceaa, 0x1a30,
    0x8a3e, 0x8358, 0x3a24, 0x54f5, 0x0c69, 0x7304, 0xb55b, 0x060d, 0xf6cc, 0xb1f1, 0x332a, 0xdfd3, 0x9838, 0xf3f2, 0x8ece, 0xcaab,
    0x4fd0, 0x513b, 0x45d6, 0x8636, 0x1821, 0xc0e6, 0x944a, 0xa891, 0x9f9c, 0xfce8, 0x2491, 0x936c, 0x80aa, 0x3266, 0x9649, 0xcfb8,
    0x34de, 0x2cad, 0x54c6, 0x104a, 0x7a9d, 0x194f, 0x2dcc, 0xf972, 0xd708, 0xb591, 0x9d60, 0xef32, 0xcda1, 0x4a98, 0x0e2c, 0xc916,
    0x8ca9, 0x9420, 0xa3eb, 0x7416, 0x4947, 0x7d8a, 0xe745, 0x0552, 0x7213, 0x59a7, 0xea1c, 0x418f, 0x3651, 0x7168, 0x63d4, 0xf6f5,
    0x1ae1, 0x36b2, 0x349e, 0x281d, 0x1bcb, 0x3463, 0xf6c0, 0xae06, 0x3ce6, 0x2097, 0xd3ef, 0xe174, 0xff53, 0x229e, 0x8e34, 0x5c8d,
    0x4390, 0x169c, 0x4d33, 0x378e, 0xe260, 0xcbcf, 0xba61, 0x79ed, 0x86e8, 0x077e, 0x6dd3, 0x9a65, 0xadb6, 0x92ed, 0xba27, 0x178f,
    0xd239, 0xdb0a, 0x13d6, 0x36ea, 0x48ee, 0x10d4, 0xe4bc, 0xcfdf, 0x299d, 0x85a8, 0xf2e4, 0x2894, 0xcd3a, 0x909b, 0x68c5, 0x928d,
    0x0bc8, 0x178c, 0x0789, 0xe8a0, 0x5386, 0xd6b3, 0xaaee, 0x81c7, 0xb694, 0xc2bc, 0x3cde, 0xa46d, 0x3e85, 0x3500, 0x0236, 0x51a1,
    0x8769, 0x5d14, 0x7a4e, 0x7740, 0x60f1, 0x3f50, 0x6d40, 0xc1d5, 0x4560, 0xafa1, 0xc13a, 0x65de, 0x871c, 0x5a51, 0x0b27, 0x62ed,
    0x7a86, 0xe7af, 0xced6, 0x4e4d, 0x2b09, 0x60dc, 0x3b6a, 0x71b8, 0x33bc, 0x53cf, 0xf1d6, 0x71fc, 0xb1eb, 0x1b9c, 0xf799, 0x742e,
    0x97ac, 0x3119, 0xccce, 0x6d39, 0x78e8, 0x8523, 0x3e6e, 0xf5a2, 0xf746, 0xfd77, 0x3a7b, 0x1265, 0x8606, 0xd222, 0x6389, 0xceb0,
    0x5288, 0x3b8e, 0x4b72, 0x130e, 0xfe7f, 0x7cc8, 0x0f6c, 0x6ae0, 0xe091, 0xd51f, 0xb39f, 0x631c, 0xe48b, 0x2f14, 0x3d5a, 0xe7f2,
    0x2d34, 0x5271, 0x001a, 0xd8ce, 0x1283, 0xfdc3, 0x619c, 0x14ae, 0x3068, 0xaadd, 0x85ef, 0xf341, 0x1365, 0x8716, 0xe6cd, 0xa090,
    0xd2ca, 0xe34d, 0x4bb8, 0x739d, 0xa272, 0x996f, 0x536a, 0xd7d1, 0x57c5, 0x1d23, 0xc9b6, 0xbaf1, 0xa689, 0x3696, 0x0271, 0xdc1c,
    0x0255, 0x4d1a, 0xcfe3, 0x1269, 0xa8b2, 0x4e6d, 0xe812, 0xceb7, 0x6af7, 0x283d, 0xc936, 0x1249, 0x7a0d, 0x3b7d, 0x4827, 0xa48d,
    0x7b50, 0xd1dd, 0x2238, 0x55ea, 0xe4a2, 0x786c, 0xdd87, 0x82ae, 0xe7dc, 0xfca9, 0x0659, 0x8d9e, 0x18a0, 0xb60b, 0xbda1, 0xd075,
    0xae65, 0x4072, 0xdf3e, 0xbdca, 0x317a, 0x706d, 0xa0b7, 0x0235, 0x200b, 0x4b25, 0x144d, 0xb481, 0x7556, 0xd180, 0x0abc, 0xb8d6,
    0x26ec, 0x82ef, 0x41a3, 0x4d16, 0x3191, 0x2465, 0xe974, 0xecea, 0x0310, 0x7718, 0xbeb2, 0xd7b1, 0x024b, 0x8971, 0x72b0, 0x3b27,
    0x0079, 0xde78, 0x8dcf, 0x152f, 0xcf5b, 0xa0df, 0xc46e, 0xa95a, 0xa4f1, 0x40e9, 0x3b9a, 0x01cb, 0x60d2, 0x5308, 0xdcec, 0x30eb,
    0x3054, 0x91ee, 0x3eed, 0x0cf7, 0xfd11, 0x6306, 0x31b2, 0xa252, 0x36de, 0x564f, 0x2908, 0xde44, 0xc130, 0xf0af, 0xaf47, 0x1960,
    0x0675, 0x9ec9, 0x9374, 0x9eef, 0x7203, 0x4ce1, 0x6b32, 0x0081, 0xb8ed, 0x5db7, 0x02fa, 0x70d0, 0xf6eb, 0x1d33, 0xa09f, 0x76a2,
    0xfcc0, 0x6011, 0x2b4c, 0xb4ef, 0x8331, 0x88fe, 0x05c5, 0x730f, 0x83b3, 0xe68b, 0x69de, 0x8a2b, 0xcc25, 0x19f6, 0x2391, 0x0e60,
    0x2a6b, 0x3573, 0x4516, 0xe32d, 0xe584, 0xc2fc, 0xba70, 0xf7e9, 0x5c05, 0x6e41, 0xd9d4, 0x88dc, 0x0c7a, 0x50e7, 0xc60b, 0xe405,
    0xc697, 0x11c9, 0x5936, 0x2ef1, 0x393f, 0xd1f9, 0xaedf, 0x5a57, 0xd941, 0xbe83, 0xcdc4, 0xbef5, 0xaf3d, 0x374c, 0xee61, 0xa0b8,
    0x8730, 0x2296, 0xd036, 0x6763, 0xc8ba, 0xd0c6, 0x6834, 0xc9a2, 0xeda5, 0x49a1, 0x98ec, 0x2259, 0x224f, 0xa3b7, 0xec33, 0x4b98,
    0x1cd2, 0x61e8, 0x69b5, 0xa9cb, 0xcc2f, 0x4e58, 0xa676, 0x2be9, 0x65dc, 0x5bb9, 0x5415, 0x6a81, 0x0288, 0xf9ce, 0xcd26, 0x9dcd,
    0x9f83, 0x252d, 0xf1f0, 0x275c, 0xcff7, 0x71bf, 0xb409, 0x57a5, 0xbad3, 0xc934, 0x7572, 0x7190, 0x27f2, 0x544c, 0x00e6, 0x1239,
    0xa76b, 0x73c1, 0x3979, 0x2b79, 0x3850, 0xe726, 0x3e39, 0xb2d6, 0x954e, 0x94cd, 0x5db5, 0x4acb, 0xa591, 0xee76, 0x8935, 0x78dc,
    0x9986, 0xf69c, 0xac82, 0x1077, 0xa667, 0xab8e, 0x34bb, 0x05c2, 0x9823, 0x6348, 0x7cfd, 0xbad1, 0x1876, 0x0e2f, 0x5f37, 0x2723,
    0x2b94, 0xcc4a, 0x6a11, 0x4ea3, 0x76bd, 0xa50c, 0x22b1, 0xba8b, 0x1280, 0x1380, 0x4e88, 0xdf59, 0xa8ac, 0x8cc4, 0x0799, 0x0251,
    0x1fde, 0x0c84, 0xd158, 0xa6ff, 0x6881, 0xb0dd, 0xc561, 0x1d46, 0xf508, 0x63c0, 0x6bd9, 0xf085, 0x8bf1, 0xe751, 0x2633, 0xa640,
    0x580f, 0x53ae, 0x6d03, 0x3676, 0xb8f8, 0x2c1c, 0x60f0, 0xd0c5, 0x5d25, 0xb958, 0xdb41, 0xebd2, 0xbd84, 0x69f6, 0x1a05, 0xe60e,
    0xf4da, 0x2a31, 0x862b, 0xe927, 0x6b0e, 0x14e6, 0xb7b9, 0xd46c, 0x1d94, 0x3be8, 0x933b, 0x7ad4, 0x1fb9, 0x0f08, 0x8c49, 0xd5f4,
    0x036a, 0xae0e, 0x0647, 0xdcd2, 0xc138, 0xbf8f, 0x881e, 0xbc03, 0x3914, 0x143b, 0x0d5e, 0x1d79, 0x894c, 0x662a, 0xa4db, 0x5514,
    0xe413, 0xf32b, 0x5743, 0x30f9, 0xc9a4, 0x1247, 0xa64e, 0x0184, 0x1e04, 0xcebe, 0xa49b, 0x7cf7, 0x929b, 0xc85d, 0xace3, 0xc924,
    0x9891, 0x1595, 0xd8c2, 0x78fe, 0x4b08, 0x85dd, 0xb8eb, 0x6e57, 0x878c, 0x7a17, 0xddd0, 0x5a92, 0x3bcd, 0x4571, 0xb38d, 0xf3dc,
    0xe73d, 0xf1ab, 0xdd3d, 0x3a69, 0x1f9f, 0xa1a6, 0xf719, 0xc932, 0xf1c4, 0x8df6, 0x7786, 0x79ea, 0xa4fd, 0xa758, 0x2692, 0xccae,
    0xd319, 0x8433, 0xad57, 0x5215, 0xab8b, 0x9320, 0x6e7d, 0xf2d2, 0x108e, 0xe77e, 0xf5ec, 0xf582, 0x6dc1, 0x1aa6, 0x9d31, 0x3843,
    0xbe4a, 0xc128, 0xab67, 0x3661, 0xc3cc, 0xd2fa, 0x21e9, 0x66a7, 0x65a0, 0xb218, 0x3ccc, 0x2fad, 0x4220, 0x6421, 0x6744, 0x1f91,
    0x247f, 0x5e60, 0x7ab9, 0x52c2, 0xb06f, 0x603c, 0xa177, 0x78c8, 0x4073, 0x07e8, 0x7656, 0x9d4e, 0xe869, 0xc91c, 0xeb4d, 0x5130,
    0x8266, 0x41fb, 0x5810, 0xf540, 0x983a, 0x6d06, 0xea0a, 0xca6e, 0x47cf, 0x0ee7, 0xbbb5, 0xf91b, 0xa693, 0xd3dd, 0xc7c2, 0x5e94,
    0xfa28, 0x620d, 0x938e, 0x7560, 0xd00e, 0x4ed3, 0xf32e, 0xd609, 0x5403, 0x8eaf, 0x49d2, 0xe4e2, 0x32fa, 0x0177, 0x9a68, 0x6369,
    0x9eee, 0x349d, 0x1edd, 0x8ba0, 0x2e81, 0x7ceb, 0x1f3b, 0x1f9e, 0x39a0, 0xf403, 0x4034, 0x3627, 0x13b5, 0xfd04, 0x5da3, 0xf19d,
    0x71c8, 0xa515, 0x4cea, 0xd202, 0x4e76, 0x60e5, 0x3f59, 0x7d93, 0xab24, 0x29b6, 0x2eb0, 0x448b, 0x9462, 0xf449, 0x96e9, 0x6bc7,
    0x0eed, 0xdbc7, 0xdb2f, 0x7ddf, 0xcdb4, 0xaee1, 0x66e9, 0x87d0, 0x1250, 0x9329, 0xaeea, 0x1c78, 0x60ad, 0x4c57, 0xa6db, 0xcb34,
    0x5bd0, 0x1a81, 0x8a02, 0x6c03, 0xc3ab, 0xee67, 0x28f6, 0xa532, 0x45f2, 0x8a17, 0x0339, 0x10b7, 0x84e3, 0x02e8, 0x64d8, 0x695c,
    0xbea0, 0x087c, 0x92ae, 0xac5c, 0x837d, 0x01e3, 0x18aa, 0xf726, 0x8d43, 0x8c2e, 0x4156, 0x3b88, 0x574f, 0x7e3f, 0x6506, 0xdd2f,
    0x2acf, 0x98da, 0xcf34, 0x4102, 0x669a, 0x1c6f, 0x1665, 0x91cf, 0xe8d9, 0x9065, 0xcdb2, 0xbc67, 0x5724, 0xaf73, 0x1769, 0x09d4,
    0x9759, 0xb01a, 0x2407, 0x5ae6, 0x3932, 0xa048, 0x97ef, 0xd9c2, 0x9be6, 0x161d, 0xd9b2, 0x1245, 0x69cc, 0xdca8, 0xd5d9, 0xe9d2,
    0x4630, 0x9a29, 0x0e59, 0x77be, 0xb469, 0x4c4e, 0x5340, 0xb1cb, 0x1dfe, 0xda09, 0x9b46, 0xe4c4, 0x2d08, 0x170e, 0x19fe, 0x20f5,
    0xe2bd, 0xc79d, 0x0e8d, 0xfbad, 0x2a16, 0x8954, 0xe484, 0xe2b5, 0x915d, 0xa848, 0x325f, 0x8566, 0x6bf0, 0xe637, 0x2bde, 0x79dc,
    0x0c9b, 0x8d2b, 0x141a, 0x93b1, 0x29ba, 0x6040, 0xf8d8, 0x667b, 0xb1f5, 0xe2a8, 0x5b60, 0x740e, 0x1d27, 0xc0ea, 0x3577, 0x5450,
    0x6c87, 0xf8d4, 0x020e, 0xf4bf, 0x4f76, 0x1f3c, 0x3d02, 0xa3a8, 0x5c9c, 0x493a, 0x1dba, 0x81b3, 0xf97d, 0xf689, 0x0da7, 0xfe3d,
    0x8c23, 0x32b5, 0x7eb7, 0xc4b4, 0x01a8, 0x29f4, 0x0c94, 0xa979, 0x4dd4, 0x62dd, 0x5647, 0x8473, 0xc966, 0x9cf1, 0xfb9e, 0xa7f0,
    0x5379, 0x3fb1, 0x6bfc, 0x2b37, 0x1561, 0x60a4, 0xc2fe, 0x8c30, 0xbaa2, 0x6f4c, 0xe90c, 0xdc23, 0xfef1, 0xa59c, 0x7ab2, 0xf1b6,
    0x903b, 0xecc0, 0x35d6, 0x2839, 0xa8c3, 0xac38, 0x58f1, 0x338f, 0x4d65, 0xae66, 0x8dc9, 0x74e3, 0x193b, 0xa141, 0x0a1f, 0x6ee4,
    0x57f7, 0xe395, 0x29e3, 0x53af, 0xeb50, 0x3125, 0xa493, 0xc5c9, 0x051b, 0x1e5e, 0xcf97, 0x7a75, 0x1bce, 0x8610, 0x99d9, 0xa72d,
    0x7212, 0x564e, 0xe495, 0x2572, 0x05db, 0x500c, 0xb38c, 0x544f, 0x14cb, 0x830d, 0x0d9c, 0xedd0, 0x570a, 0xce30, 0x5d65, 0x8121,
    0xf4a2, 0x3e16, 0x1362, 0xb6c5, 0x5826, 0x4e39, 0x93f4, 0x15c3, 0x760a, 0x23d9, 0xaa21, 0x4e2d, 0x63f0, 0xfc3c, 0x66ca, 0xa74a,
    0x3a53, 0x510b, 0xa442, 0x2d45, 0xbf0f, 0xcb2b, 0x813f, 0x8fd5, 0xebe9, 0xc23a, 0xfce2, 0x932f, 0xc78d, 0x5893, 0xdf15, 0x6af3,
    0xc9eb, 0x7a2c, 0x2dd8, 0x729f, 0x0d38, 0x98fc, 0xeab8, 0x7a66, 0xd3da, 0x7f72, 0x10a6, 0xa4c1, 0x5e10, 0x28ca, 0xb2e9, 0xf48c,
    0x9f43, 0xdfa1, 0x405e, 0x60bc, 0x5ec6, 0xcac0, 0xd451, 0x811e, 0x77b8, 0x7da6, 0xc65d, 0x95bb, 0xe23c, 0x700f, 0xa0d0, 0x9d8c,
    0x0f1f, 0xc275, 0x89bb, 0x0cbf, 0x0bbd, 0xc643, 0x0a60, 0x136f, 0x8fe8, 0x3318, 0x4bdf, 0xa817, 0xa07a, 0x082c, 0x893b, 0x2684,
    0xbf41, 0xb79e, 0xb1db, 0xd6d2, 0x8edb, 0xdb75, 0xd857, 0xfb6e, 0x8cd3, 0x7b28, 0xf14e, 0xfe72, 0xb7d0, 0x238e, 0xfa7f, 0x3b4a,
    0xc01e, 0xc4ed, 0xc0af, 0x21a1, 0x7515, 0xa6d2, 0x45f4, 0x8333, 0x35a9, 0xfd5e, 0x73a4, 0x15b6, 0x0b77, 0x6677, 0xeed3, 0xcf70,
    0xd650, 0x1416, 0xd49d, 0xc29d, 0xd4dd, 0x6916, 0x3649, 0xf13a, 0xe8ed, 0xc893, 0x0dd3, 0x6bcf, 0x5694, 0x21c7, 0x0d40, 0x4fa1,
    0x1a0d, 0xb268, 0xebb7, 0xd695, 0x1b50, 0x7075, 0xaabb, 0xe071, 0x9e7f, 0x031c, 0x25ef, 0x9dc3, 0x9746, 0x95a2, 0xdb69, 0xf3ce,
    0x48ac, 0xeea2, 0x7158, 0x8751, 0x94da, 0x75f4, 0xba04, 0xf3ad, 0x4667, 0x5ad1, 0xfdb4, 0x8726, 0x05dc, 0xcbe8, 0x5409, 0x6934,
    0x96eb, 0x3eef, 0xdeec, 0x90af, 0xc6eb, 0xdb26, 0x7cec, 0x7e78, 0x2331, 0x2a2b, 0x79d4, 0x62fc, 0x8da5, 0x69a2, 0x4edf, 0x5e83,
    0xc3f6, 0x24a5, 0xda23, 0x93f2, 0x8d67, 0x44cd, 0x1498, 0x35dd, 0xb141, 0x6a55, 0x2ce5, 0xf78f, 0xe2eb, 0x03dd, 0x5dda, 0x3d3a,
    0x75f6, 0xf020, 0xa3a6, 0x3b79, 0x2a82, 0xbcd5, 0xe1dd, 0xbedd, 0x0454, 0xcf45, 0xf65f, 0x123f, 0xb93d, 0xbfea, 0xb9bd, 0x3bbf,
    0xf300, 0x837b, 0x190f, 0x2ef4, 0x2ba1, 0x7dd6, 0xaeb9, 0x31aa, 0x88f3, 0xc03d, 0xbdcb, 0x493d, 0xc9db, 0x351d, 0x59e5, 0x1b53,
    0x6d04, 0x9c89, 0x4dbc, 0x2980, 0x6579, 0xe1f7, 0x441c, 0x59bc, 0x8342, 0x7632, 0xcb48, 0x5d0a, 0x5be0, 0xc15f, 0x3e8f, 0x5a18,
    0x678d, 0xcd44, 0xcdd7, 0xc8c9, 0x94a2, 0x474a, 0xfd64, 0xf64d, 0xabbc, 0x4817, 0x665d, 0x6ac0, 0x2cd3, 0x9b6e, 0xe5f3, 0x9d5e,
    0x9ef1, 0xcb36, 0x1eb7, 0x3cf1, 0x303b, 0x0ee4, 0x39d9, 0x8395, 0xc9b9, 0x140e, 0xbdb9, 0xbf3b, 0x315d, 0x82b5, 0xf33f, 0x7a09,
    0x0dc1, 0xf214, 0x4b67, 0x0421, 0x2266, 0xfe93, 0x8b4d, 0xfe5f, 0xbf9e, 0x19ea, 0x7dd0, 0x25dd, 0xd913, 0x5c03, 0x464e, 0x6ebe,
    0x00ad, 0x1ddf, 0xece9, 0x9449, 0x9a28, 0x0369, 0xfda2, 0xd49c, 0x63ab, 0xb0b6, 0xe155, 0xa1e2, 0x3be6, 0x79c2, 0xb664, 0x3065,
    0x69db, 0xcef3, 0xedbb, 0x615f, 0x15f6, 0xdbbe, 0xfdd9, 0xc4a4, 0xbb4f, 0x3dc3, 0xadd2, 0x0916, 0xe666, 0x93ad, 0x1cec, 0xca2a,
    0xd15c, 0xdcf0, 0x6dd7, 0x3b6e, 0xadc0, 0x0ebe, 0x5664, 0xbdde, 0x2ddc, 0x99dd, 0xddd4, 0x1669, 0xcddb, 0x5dde, 0x9dd9, 0xddc2,
    0x11e0, 0xa5f8, 0x2662, 0xe93f, 0x8ddc, 0xe143, 0x0a26, 0xbd69, 0xdebb, 0x2303, 0xedcd, 0xf9dd, 0x6e91, 0xb344, 0x7dbe, 0x957b,
    0xacee, 0xc6ed, 0xa9d6, 0xbda7, 0x840b, 0x7669, 0xa15a, 0xc4dc, 0x664b, 0x0653, 0x3dd5, 0x8696, 0x0b6c, 0xce81, 0x1bba, 0x4b52,
    0x5dce, 0x64e0, 0xcd62, 0xfda3, 0xc64b, 0xcf9e, 0x75d8, 0x4823, 0x1748, 0xbcab, 0x1a1f, 0x6653, 0xbe36, 0x6ce8, 0x64a0, 0x4bcd,
    0x9d42, 0xb76b, 0xf13c, 0xb71e, 0x3238, 0xe696, 0x378b, 0x8388, 0xea63, 0x7392, 0x9dd5, 0xddb8, 0x98c7, 0x599f, 0x43d8, 0x78f0,
    0x1815, 0x3257, 0xf938, 0xaa0f, 0x3273, 0x87c7, 0x7bba, 0xd274, 0x0d8a, 0xab52, 0x365b, 0x48a2, 0x3abe, 0x500d, 0x0f41, 0x617c,
    0x919e, 0x5d36, 0xb5f1, 0x4367, 0x6d5c, 0x1094, 0x7b74, 0x2e82, 0x6b6c, 0xaa88, 0x21d9, 0xe1ed, 0x938b, 0x2749, 0xfcd0, 0xa8ea,
    0xe40b, 0xcf85, 0xa574, 0x57f4, 0xfd28, 0x95de, 0x99b7, 0xfc31, 0x6e3b, 0xd76d, 0x8db7, 0xd593, 0x8f39, 0xc825, 0xdc84, 0xd669,
    0xe7bb, 0x24dd, 0xc33d, 0x4fbb, 0x4a07, 0x8d27, 0x9d05, 0xe8fa, 0x52b3, 0x5b96, 0x7e8a, 0xd8ae, 0x5635, 0x250b, 0x015b, 0x9883,
    0xea72, 0x5a6d, 0x09d7, 0x3c7c, 0x5393, 0xb3b5, 0x5b4e, 0xb333, 0xdee1, 0xf699, 0xfdc6, 0xdf3f, 0x1c36, 0x1da8, 0x0039, 0xf8bc,
    0x9b34, 0x3677, 0x32fc, 0x26ee, 0xdf49, 0x66e0, 0x6eef, 0x2d14, 0x1977, 0x56ee, 0xeeb4, 0x324d, 0x0cef, 0xd4f3, 0xbdd1, 0xff5d,
    0x80b4, 0x3a93, 0xd4d5, 0x05f9, 0x8a7e, 0xaed8, 0x33a9, 0x480b, 0x4d2d, 0xba84, 0xb153, 0xd8b8, 0x71e0, 0xbbaa, 0x2e9e, 0x985c,
    0xb0ff, 0x60d5, 0x8662, 0x4022, 0x0063, 0xe0c4, 0xc721, 0x9456, 0x49c0, 0x0c97, 0x9404, 0xca64, 0x4ca6, 0x4940, 0x0be4, 0x85cf,
    0xa624, 0x1d6a, 0xcda0, 0x5307, 0xa49a, 0x8565, 0x9e7e, 0x7391, 0xd366, 0xd9a0, 0xb9cf, 0x53f9, 0xbed0, 0x26cf, 0x6a26, 0x3c6b,
    0xeddc, 0x234b, 0xd6e6, 0xaabd, 0x0327, 0x72ee, 0xd0aa, 0x7832, 0xed90, 0x9f1a, 0xbce7, 0x7e35, 0x6447, 0x3038, 0x1b22, 0x4144,
    0x0d4c, 0xda02, 0x5b4b, 0xc76e, 0xce5d, 0xe064, 0x206d, 0x1345, 0xce91, 0x56d8, 0x2bb3, 0xa489, 0xdd03, 0xebe2, 0xf263, 0xe034,
    0xc212, 0x7761, 0xde7a, 0xfd06, 0x577c, 0xcdab, 0xddbe, 0xdde1, 0xd6a4, 0xf57b, 0x1b65, 0x93a7, 0xd41e, 0x7774, 0xd59d, 0xb8dd,
    0xe9e7, 0x1739, 0x968f, 0x6498, 0x61a9, 0x59de, 0x8f9c, 0x3cba, 0x63da, 0xca23, 0x4dce, 0xa070, 0xf5da, 0x3294, 0x088f, 0x18f6,
    0xa0f6, 0xbba3, 0x164c, 0x972e, 0x3ebc, 0x28e2, 0x0299, 0xcc98, 0x2c01, 0x4871, 0x7644, 0x8303, 0xd627, 0x3ab7, 0xa911, 0xc288,
    0xb208, 0xade2, 0x581c, 0x2d92, 0x8c01, 0x1383, 0xe88c, 0xf223, 0x8f8d, 0xb667, 0x85d1, 0xa871, 0xb0b7, 0xb6c8, 0x9136, 0xd876,
    0x7e0c, 0x879f, 0xdf97, 0x9f68, 0x4c2d, 0xe303, 0xd367, 0x01c5, 0xb911, 0xa9b3, 0xd644, 0x7e70, 0xacd0, 0x4be6, 0x7261, 0x78ba,
    0xe438, 0x8ad2, 0x0d9d, 0xd7c6, 0x678a, 0xd600, 0x0912, 0x1801, 0xd96c, 0x2289, 0xdd5b, 0x6ead, 0xed76, 0xa853, 0xf58c, 0x2b14,
    0xb295, 0x71ed, 0x74d9, 0x467a, 0x2512, 0x75b9, 0x5045, 0x9ab7, 0x3628, 0xad4a, 0x6dc7, 0xbaed, 0x3a3b, 0xaf2a, 0x594a, 0xa339,
    0x9ebc, 0xa2c7, 0x5bc6, 0x2c8a, 0x005d, 0x709c, 0xee01, 0x9c47, 0x1c60, 0x9fcf, 0x7499, 0x7975, 0x4cf5, 0xd3c4, 0x76ad, 0x88e2,
    0x063a, 0x2c99, 0x7ce1, 0x511b, 0x9922, 0xf8f2, 0x2170, 0x5df3, 0x985b, 0xe5f2, 0xce2f, 0x32f9, 0x6a80, 0xf1d5, 0x6299, 0xb061,
    0x184e, 0x2f5e, 0x764c, 0x2c91, 0xd181, 0x1f06, 0x36f1, 0xa600, 0xe244, 0x4f72, 0x2a18, 0xf748, 0x24f5, 0xf72e, 0x99a2, 0x0463,
    0xc329, 0x59eb, 0xcca4, 0x1ba4, 0x6856, 0xf325, 0xb411, 0x7226, 0x1a47, 0x46ae, 0x2741, 0x2fb7, 0x00f7, 0x23ce, 0xbd85, 0x45b6,
    0x5df4, 0x3df1, 0x9381, 0x7739, 0x9d58, 0x4eca, 0xc1c2, 0x8f8b, 0xa98f, 0xce49, 0x4784, 0x7b0c, 0x49e8, 0xcf28, 0x5787, 0xcfdc,
    0xe83e, 0xee92, 0xf68f, 0x358b, 0x9cac, 0x24e4, 0xe468, 0x9f7c, 0x7756, 0x76e3, 0x4231, 0x9ec2, 0x5f4d, 0xc498, 0x74fb, 0x5e52,
    0x9b56, 0x9cba, 0xc717, 0xb830, 0x9930, 0x1f38, 0xa2e8, 0x4c3b, 0x71a4, 0xe46a, 0x0136, 0x2ea0, 0xe8bd, 0x0c12, 0xef9c, 0x8028,
    0xc1a9, 0x0168, 0xc764, 0x12c9, 0x557a, 0x9b40, 0xb73b, 0xc7b7, 0xe2a0, 0x8aa7, 0xad3b, 0x934c, 0x0a67, 0x1b90, 0x7f4b, 0xb9de,
    0x095d, 0xb3ee, 0x88e9, 0x84fc, 0x3e55, 0xa054, 0x0fdb, 0x9294, 0x55db, 0xb4ac, 0x53d1, 0x4c50, 0x3d17, 0x1150, 0x1b06, 0x9629,
    0xe592, 0xf925, 0x6998, 0xcf69, 0xc709, 0xd005, 0x688f, 0x4fca, 0x321c, 0x78f6, 0xa8c0, 0xb992, 0x48fc, 0xd97f, 0xd096, 0x7aab,
    0x4a15, 0x1e72, 0xedb1, 0x3246, 0xfeba, 0x0071, 0x578a, 0xea22, 0x389f, 0x3049, 0xadce, 0x89f5, 0x2a90, 0x3a2f, 0x4779, 0x1b5e,
    0xe723, 0x2e8f, 0x838b, 0x04d9, 0xc3da, 0x6cb5, 0x7789, 0xc9b2, 0x156f, 0x4590, 0xfa5c, 0x2a24, 0xd2a5, 0x5834, 0x0bcb, 0x7059,
    0xdee4, 0x4315, 0xe26d, 0x014c, 0x9323, 0x048a, 0x17cd, 0x6707, 0xfe9e, 0x9951, 0x8bb3, 0x08d6, 0xc919, 0x63ac, 0x2349, 0x9c20,
    0xa203, 0x9430, 0x97c0, 0x680d, 0x2e92, 0x7e54, 0xfaec, 0xd9a1, 0xa3db, 0x1174, 0x426c, 0xb6d8, 0x5501, 0xcc64, 0x7691, 0x9d40,
    0x1b26, 0x3300, 0xba08, 0xedd1, 0x9a6c, 0xad5b, 0xe488, 0x4be3, 0x3d04, 0x85f1, 0x0932, 0xbab8, 0xbda5, 0xa3ef, 0x6838, 0x7d01,
    0x11f9, 0x4674, 0x4250, 0xb571, 0x76b1, 0x9385, 0x5264, 0x4270, 0xeaf8, 0x4035, 0x280e, 0x3e9b, 0xc53e, 0xa3a4, 0x8e68, 0x73d7,
    0xc373, 0x7345, 0x7175, 0x6412, 0x48c6, 0xb63d, 0x4230, 0xcd81, 0x303a, 0xe0c3, 0x1f3a, 0x15c2, 0x97ab, 0x252c, 0x806d, 0x4051,
    0x2e5e, 0xa41d, 0x6006, 0x64c3, 0x7196, 0x89ea, 0xf47c, 0x70ee, 0x4533, 0xc608, 0x4ab7, 0x5824, 0x22c0, 0x81f9, 0x117c, 0x4065,
    0xd7e5, 0x6b64, 0x589b, 0x3a03, 0x3c0e, 0x7557, 0x1071, 0x66f1, 0xca6c, 0x43e3, 0x4654, 0xc8f6, 0x6d4c, 0x6795, 0x3ca5, 0x57c1,
    0xd1c5, 0x24b2, 0xbb4b, 0xa747, 0x212e, 0x3c1a, 0x95e5, 0x87df, 0x991a, 0x18a8, 0x1d83, 0xdea7, 0xd474, 0x276f, 0xb867, 0x69f7,
    0x5dfa, 0x2171, 0x3e7b, 0x192f, 0xc2d0, 0x79f4, 0xaadb, 0xa7a8, 0x631e, 0x667d, 0x8b6d, 0xc426, 0x1bda, 0x5d07, 0x7b89, 0x6df7,
    0x5431, 0x4dee, 0x208d, 0xd761, 0x0c04, 0xfa1f, 0xa317, 0xd706, 0x0f61, 0xe3c1, 0x7d55, 0xcd82, 0x2213, 0x7eaa, 0x6f0f, 0xc90e,
    0xb77c, 0x5b80, 0x5360, 0x1d1f, 0x7ad2, 0x42b4, 0xe08b, 0x2a03, 0xfa9f, 0x14f1, 0xc5ea, 0x407e, 0xc580, 0xaa41, 0xead8, 0x2dac,
    0x9a88, 0x3de2, 0x6d2f, 0x4d0a, 0x0841, 0xd9d2, 0x18ca, 0x27d7, 0xeaa3, 0xf60c, 0xa197, 0x728e, 0x26b2, 0x83f3, 0x3dbf, 0x5763,
    0x8216, 0xfbd0, 0xb8e3, 0x2885, 0xa43c, 0x6204, 0x359e, 0x1335, 0xba32, 0x18de, 0x0cca, 0x5fba, 0xffaa, 0xe4f6, 0x7114, 0x5e1f,
    0x5a9c, 0x4354, 0x3742, 0x976a, 0xef8e, 0x5680, 0x5260, 0xd774, 0x341f, 0x5ef8, 0xa384, 0x102a, 0xeefc, 0xe6f6, 0x121e, 0xeb3f,
    0x07b9, 0x727a, 0xf1e6, 0x6d23, 0x36a5, 0x7d1d, 0xb429, 0x4cb6, 0xa2f8, 0xbed2, 0x31d2, 0x557c, 0xec53, 0x4a3a, 0x93ca, 0x4536,
    0x9126, 0x3cfe, 0xba81, 0x9e2b, 0x0e4c, 0xf3a7, 0x8e48, 0x34be, 0x3d7a, 0x00cb, 0x7b65, 0xcef6, 0x065f, 0xc956, 0xa0d7, 0xb7d3,
    0xe61a, 0xef57, 0x0c2b, 0xfb37, 0xf2dd, 0x016e, 0x6be4, 0x5b3e, 0xb47a, 0xe5cf, 0xa9b0, 0xe08e, 0xe242, 0xf4bb, 0xa1e3, 0x8e14,
    0x6341, 0x5a74, 0xa5d7, 0x83b6, 0xb9d0, 0x67de, 0xaa7c, 0xa940, 0xaca6, 0x5840, 0x0d22, 0x0e90, 0xa4ea, 0xb4aa, 0x39ca, 0x5e86,
    0x14cc, 0x07e5, 0x67ed, 0x227e, 0xa9c0, 0xa7c5, 0x5234, 0x7ac5, 0x7046, 0x4b83, 0xb56d, 0x6c97, 0xbc71, 0x699a, 0x0930, 0x2bb5,
    0x8018, 0xc3b8, 0xdf7e, 0x4719, 0xa415, 0x2a65, 0x6757, 0x4ba7, 0xd85e, 0x1502, 0xf404, 0x24c7, 0x2ae4, 0x237e, 0xb1ba, 0xc424,
    0xa19f, 0xc61e, 0xe662, 0x51a8, 0x61cd, 0x9cc2, 0x45bd, 0x0895, 0xec6c, 0x06da, 0xec7d, 0x7fa0, 0x2e7a, 0xa022, 0x3698, 0x32b7,
    0x68d8, 0xad79, 0xd81e, 0xc0d5, 0x0a59, 0x32f1, 0xfacc, 0x3cc6, 0xc5c2, 0xa020, 0x9f32, 0xb8aa, 0x1100, 0x90c3, 0x4e2a, 0xa685,
    0x6063, 0x5d4c, 0xe58c, 0x1cb7, 0xc336, 0x0b82, 0xb8d7, 0x1797, 0x9727, 0x44a1, 0x9db0, 0xa2a6, 0x8c65, 0x5907, 0xd4c8, 0x40c5,
    0x1dd8, 0xf456, 0xe766, 0x8759, 0xd9d1, 0x5579, 0x6b74, 0x2922, 0x7f71, 0x124f, 0x7e34, 0xe154, 0x1a06, 0x13ec, 0x2722, 0xe6cc,
    0x4d80, 0xa80b, 0xf8f3, 0x9a44, 0x7530, 0x0cda, 0x10c1, 0xfc57, 0xbe65, 0xca89, 0xacfe, 0x8e11, 0x84fe, 0xbc82, 0x93a9, 0x6100,
    0xea7e, 0xa905, 0x9d20, 0x3692, 0x8a99, 0x5322, 0x2bce, 0x32af, 0x48c7, 0xf155, 0x5a00, 0x6a70, 0x3c01, 0xbf56, 0xa9f1, 0x0ed9,
    0x5a15, 0x4f06, 0x5fb4, 0x9a93, 0x4c5d, 0x6360, 0x15f0, 0x6668, 0x258a, 0xdc44, 0xd336, 0x86bb, 0xe0b4, 0x821c, 0x7be3, 0x3401,
    0x1daf, 0xa65b, 0x34d6, 0x2548, 0x395a, 0xb50a, 0x2923, 0x898c, 0xd2e5, 0x82c9, 0xf7b4, 0xd53a, 0xcd55, 0x65f9, 0x54e1, 0x347e,
    0x5c2c, 0x020a, 0xa87c, 0x06c4, 0x7492, 0x38b9, 0x5d41, 0xd94d, 0x89ee, 0xe3c5, 0x1154, 0xade6, 0x0b86, 0xdc48, 0x4c7f, 0x904c,
    0x14ea, 0x5dbb, 0x3504, 0x3b92, 0xad2d, 0xa567, 0x3081, 0x4f16, 0x4e3d, 0x6f50, 0x662e, 0x1a85, 0xfe97, 0xc041, 0x274d, 0xbba7,
    0x1c7b, 0x047e, 0xe8a7, 0x8aed, 0xc724, 0x04f4, 0x424c, 0x1bab, 0xd1e0, 0x7109, 0x8e83, 0x118f, 0xec6e, 0x5fd5, 0x537b, 0x7a0f,
    0xd879, 0x5ea1, 0x6b8f, 0xad94, 0x4c78, 0x9a5f, 0x8e9e, 0xdc63, 0x40be, 0xf85c, 0x62ac, 0x2d5f, 0x7c5a, 0x9c0a, 0xe507, 0xcc14,
    0x40a3, 0xc1dc, 0xc32c, 0xc735, 0xa607, 0x7f31, 0xb30a, 0x86cf, 0x1ed1, 0x949f, 0x6b47, 0xdc18, 0xd077, 0x283b, 0xa00c, 0xe156,
    0x320b, 0xb6fd, 0xc3ae, 0x1a41, 0x12bb, 0x53fa, 0xca26, 0x2d0e, 0xd490, 0x9c6b, 0x638c, 0x73f6, 0x455e, 0xf775, 0x59f1, 0xf532,
    0x5ead, 0x830e, 0x4c75, 0x33e3, 0x8400, 0xb3f9, 0x2401, 0xf841, 0x4766, 0x261e, 0x19d0, 0xdac4, 0xb4e0, 0x1c82, 0xae3c, 0x718e,
    0x08c0, 0x9048, 0x6a66, 0x2fdc, 0x3367, 0x3600, 0x2329, 0x8c89, 0xd174, 0x84b1, 0xfa6b, 0x39a1, 0xdb88, 0xe3f2, 0x02f8, 0x7029,
    0xc401, 0xebfa, 0x08b6, 0x7d6a, 0x1d8e, 0x8ea6, 0x099e, 0x7fc2, 0x059b, 0xaafa, 0x1032, 0x787f, 0x0625, 0x87fb, 0x6291, 0x0965,
    0x213a, 0x677d, 0x2da1, 0x56f5, 0xc19b, 0xc0db, 0x6254, 0xb5e9, 0xcd02, 0x6c83, 0x2c2f, 0x65c1, 0x0f47, 0xb307, 0xe3b2, 0x8258,
    0x965a, 0xd391, 0xef38, 0x5f5d, 0xef9b, 0x2dab, 0xe0b3, 0x0abd, 0x4ce9, 0x2d44, 0x0dc0, 0x1d69, 0x9e8e, 0x63dc, 0xfe7e, 0xe725,
    0x049b, 0xda16, 0x0693, 0x9842, 0x78a9, 0x7c6e, 0x6eec, 0xd55f, 0x4495, 0xda2b, 0xeeda, 0x736e, 0x5b9e, 0xe60f, 0x11f5, 0xe565,
    0x6327, 0x3428, 0x3d0d, 0x9923, 0x55e4, 0x775f, 0xe24d, 0x3631, 0x1eda, 0xcd0b, 0x7ee8, 0xc450, 0xec75, 0xacaf, 0xd1e9, 0xd2ee,
    0x9ac7, 0xd832, 0x76d9, 0xf394, 0x9b32, 0xf8d0, 0x1e40, 0x9e37, 0x1c55, 0xb63e, 0xef42, 0x90f1, 0x7c3f, 0x5617, 0x30ab, 0x6cf8,
    0x65e5, 0xf511, 0x36e7, 0xedae, 0x57ce, 0xf74f, 0xb69d, 0x3cef, 0x7edf, 0x1947, 0x42f5, 0xf6d5, 0x29e5, 0x0abe, 0x9db2, 0xbbe9,
    0xabc5, 0x2de5, 0x4670, 0x834b, 0xce9a, 0x49c9, 0xdeea, 0x6b75, 0x391d, 0x65a9, 0xab2d, 0x9bef, 0x4ddd, 0x9166, 0x8cdc, 0xd3e3,
    0x9bd6, 0x60a2, 0x0f57, 0x0507, 0x4d91, 0xf2a4, 0xe955, 0x026d, 0x30e3, 0xa229, 0xcdca, 0xff1a, 0x4873, 0xa187, 0x1e74, 0x069d,
    0x7513, 0xb758, 0xe4ec, 0x39fd, 0xb72d, 0xde35, 0x41c6, 0xc9d5, 0xf46b, 0x230f, 0x1ce8, 0xc0b6, 0xa200, 0x73be, 0x9303, 0xe9fc,
    0xf9b3, 0x0084, 0x4246, 0x0182, 0x17da, 0xe4d9, 0x7b22, 0x6b80, 0x2797, 0xa144, 0xfead, 0xbe19, 0x1489, 0xc3f9, 0xb713, 0x7b00,
    0x7d30, 0xa824, 0x66e7, 0x5987, 0x3bc5, 0xcbf9, 0x8d11, 0x9038, 0xc447, 0x5efb, 0x2970, 0xf802, 0x7944, 0x4c7b, 0x6460, 0x7bd7,
    0xcd5c, 0xca9a, 0x5804, 0x3f30, 0xb6c2, 0x748e, 0x05a7, 0x10e4, 0x79c3, 0xc210, 0x43a2, 0x554f, 0xe5b3, 0x46be, 0x0542, 0x7094,
    0xbe18, 0x8e82, 0xbed1, 0x389e, 0x9f6e, 0xca4b, 0xab4a, 0xaa4e, 0x3675, 0x2237, 0x9a77, 0xe28a, 0x3cb9, 0x0a25, 0xdb74, 0x6699,
    0xb2eb, 0x34a0, 0x15f2, 0xdd9b, 0x5331, 0x644a, 0x5d66, 0xc06a, 0x76d0, 0xbaf4, 0xe4ce, 0x1eb5, 0x4196, 0xa367, 0x4513, 0x6d20,
    0x94eb, 0xd603, 0x4a8c, 0xbd36, 0x7477, 0x1ed4, 0x901c, 0x6b99, 0xdded, 0xa285, 0x90ad, 0x37f0, 0xf19e, 0x36cb, 0xeb16, 0xa26e,
    0x1096, 0xbb0b, 0xa855, 0xcad1, 0xcb6c, 0x2b3f, 0x5b25, 0x7c19, 0xab73, 0x627d, 0x3e97, 0x0a89, 0x8c74, 0x155f, 0x5ed9, 0xb3bd,
    0x879c, 0x5285, 0xcba3, 0xf9c8, 0x9c9e, 0x41ee, 0x8f3f, 0xa449, 0x4125, 0xe983, 0x81d9, 0x7720, 0xa6d0, 0xd932, 0x54ce, 0xc3be,
    0x4b26, 0x818e, 0xe8b1, 0x27af, 0x6907, 0x8b97, 0x5cd1, 0xf0dc, 0xafa7, 0x08eb, 0xc14c, 0x507e, 0xce70, 0x81af, 0x4049, 0xa64c,
    0x4f40, 0x724c, 0xca7d, 0xb760, 0x0b48, 0xa933, 0x115c, 0x8749, 0xf38b, 0x4cbe, 0x5d26, 0x5e5d, 0xd2ad, 0x1609, 0x87ce, 0x8570,
    0x7418, 0x6af5, 0xa44f, 0x898e, 0x511c, 0xaed5, 0x280a, 0xb00d, 0x9abe, 0x3189, 0xd71a, 0x8157, 0xee20, 0x0559, 0x2ec4, 0x01ef,
    0xaf9f, 0x375a, 0xf0bd, 0x3e68, 0xee84, 0x9ee5, 0x6f41, 0x6a04, 0x2f22, 0xc17c, 0x105c, 0xb619, 0x30ba, 0x350e, 0x7176, 0xc11a,
    0x4da4, 0x1db6, 0x501b, 0x7570, 0x26dd, 0xa8a2, 0x47b6, 0x32a2, 0x5c11, 0x4987, 0x965b, 0xb352, 0x65b9, 0x352b, 0xcbf6, 0x77df,
    0xf457, 0x74a5, 0x70ce, 0xaf81, 0x6d8a, 0xc92a, 0x457f, 0x4a57, 0x400d, 0xa14f, 0xc0f8, 0x0b53, 0x58a1, 0xac67, 0xb23a, 0x239c,
    0x0316, 0x06a9, 0x95c8, 0x9257, 0xfae6, 0x3494, 0x5fe6, 0x86fc, 0xa886, 0x38b5, 0x1bdd, 0xdff5, 0x7815, 0xad71, 0x4f09, 0xaa36,
    0x3539, 0x5b3b, 0x5939, 0xc849, 0xf681, 0x81bd, 0xa375, 0xfaf9, 0xd829, 0x8f64, 0x5c9f, 0x2863, 0x4d70, 0x0a10, 0x7078, 0xab59,
    0x0c20, 0x3275, 0xda5d, 0x3a3d, 0xe36c, 0xf73c, 0xa861, 0x42e1, 0x9641, 0x67a3, 0xa3fd, 0x62cd, 0xaa4f, 0xc83b, 0xdbba, 0x4a48,
    0x9273, 0x63ea, 0x1c90, 0x996b, 0x0acc, 0x368c, 0xdf1c, 0xc407, 0x822a, 0xd5bc, 0x59b9, 0x5fe3, 0xdcbc, 0x5915, 0x69a8, 0xe7c7,
    0xd878, 0xa823, 0x838a, 0x9e2a, 0x244d, 0x5d99, 0xdf1b, 0xa009, 0x200a, 0x3be7, 0xae77, 0xdfd2, 0x0b6b, 0x3ab6, 0xd5d8, 0xcf6f,
    0x264c, 0x07ce, 0x955e, 0x26d0, 0x9eb4, 0x10ad, 0x4210, 0xb674, 0xc2e0, 0x5f1c, 0xb493, 0x7681, 0xf56f, 0xf0cd, 0xeaf4, 0x2f9f,
    0x530b, 0xf8c0, 0x6300, 0xc4e0, 0x8ba4, 0x1f95, 0xe4c8, 0x8122, 0xa97c, 0x0aa0, 0xdd99, 0xdc2d, 0xbdce, 0x5c91, 0xbef9, 0xb2da,
    0x5f61, 0xbbed, 0x2d63, 0x4bab, 0x511f, 0x5e56, 0x5fbe, 0x670b, 0x9e2e, 0x5c98, 0xb61d, 0xa44d, 0x2750, 0x5da4, 0x2708, 0x48d2,
    0xf3d6, 0xe837, 0x4c64, 0x4919, 0x5ea7, 0xc653, 0x4608, 0xb039, 0xa7d6, 0x608b, 0x7a1f, 0x42d0, 0x1e2b, 0x71e6, 0xc353, 0x0216,
    0xab13, 0xd949, 0x36c8, 0x2cd0, 0x7748, 0xa740, 0x1fcf, 0x185b, 0xcc3a, 0x373b, 0xcec9, 0x1cac, 0xb245, 0x038b, 0x33ee, 0x6592,
    0x7532, 0x200c, 0x63f2, 0x34e0, 0xe5c0, 0x9031, 0x5a2b, 0xcce8, 0x1e37, 0x624d, 0xc9c8, 0xd7cd, 0xb9fc, 0x8f56, 0x2824, 0x79b3,
    0x0e14, 0xb9c9, 0xe999, 0xaae3, 0xff9f, 0x1f32, 0xc4a0, 0xff70, 0x7c57, 0xabcd, 0xe35f, 0xb959, 0x86c3, 0xb503, 0x847d, 0x5879,
    0x4f70, 0x7a7f, 0x882b, 0x623c, 0x24c1, 0x7ce2, 0xa3d8, 0x94ca, 0x45c9, 0xd8f0, 0xe0a3, 0x81a7, 0x74bf, 0x9419, 0x479d, 0xc62f,
    0x89d3, 0x55d9, 0x82e7, 0xd74e, 0xc48a, 0x2eea, 0x0eaf, 0xb99f, 0xf8c7, 0x6a0a, 0x1320, 0x43cc, 0xf8fd, 0x5d3d, 0x2e0e, 0x6413,
    0x38dd, 0x7263, 0xbab6, 0x75da, 0x4a64, 0x3153, 0x1f1a, 0x5366, 0x68fa, 0x19b7, 0xe6df, 0xd392, 0x371e, 0x4d62, 0xdd35, 0x9814,
    0x4a2a, 0x1dd9, 0x3344, 0x8b6b, 0xeabf, 0x3db9, 0x99e9, 0xe3aa, 0xb5dc, 0x61dd, 0xfdd5, 0xe578, 0x429d, 0x6bb7, 0x6ea2, 0x16eb,
    0x5f1e, 0x5324, 0x513d, 0xce32, 0x5fd3, 0x09cd, 0xfefd, 0xd562, 0x9b29, 0x9d2a, 0x2b1b, 0x9808, 0x8583, 0x171f, 0x8f0d, 0x5c94,
    0x2109, 0x2d01, 0x4031, 0x176c, 0x74ed, 0x2e78, 0x0a51, 0xc771, 0x8fc1, 0xf0f3, 0x7440, 0x1286, 0xfd42, 0x588c, 0x1139, 0x6736,
    0x9238, 0x4d26, 0x8e2e, 0x2591, 0x7085, 0xce87, 0xbbe7, 0xdd24, 0x295a, 0x6974, 0xcce0, 0x7d11, 0x632d, 0xab4b, 0xa295, 0x4697,
    0xf42d, 0xe388, 0xaf13, 0x9364, 0x3af1, 0x4936, 0x7ca9, 0xa00a, 0x2891, 0xadcb, 0xfd89, 0x9bca, 0xb78d, 0x93d5, 0x978b, 0x0769,
    0x9805, 0xeeb1, 0x233e, 0xc67e, 0x81c9, 0xfe74, 0x587b, 0xad96, 0x1c4c, 0xf979, 0x3066, 0xd11f, 0xf22a, 0xafbb, 0x8467, 0xac95,
    0x6a27, 0x09fa, 0xf05d, 0x84dd, 0xcfce, 0x3997, 0x162e, 0x0501, 0x0f90, 0xfb10, 0xde56, 0xb58f, 0x47bc, 0x1351, 0x002d, 0x3835,
    0xaa07, 0xc082, 0xd767, 0xcd0e, 0x570b, 0x4d87, 0xedfb, 0x9933, 0x9339, 0xdfbe, 0x6b44, 0x176f, 0xb4c2, 0x4efb, 0xc53a, 0xed27,
    0xe6f5, 0x48fb, 0xe9fb, 0x274c, 0xf0f2, 0xd828, 0xc055, 0xe416, 0xe70b, 0x88da, 0x1d45, 0xe811, 0xc274, 0xbe9f, 0xfd05, 0x6dd6,
    0x7846, 0x5ac9, 0xf02d, 0xafe0, 0xad12, 0xf3fa, 0x615b, 0x473a, 0xffc6, 0xf883, 0x025d, 0xd6f9, 0x5564, 0xf372, 0x672a, 0xdf61,
    0xeb84, 0x3e1e, 0xfbdb, 0xd98b, 0x49da, 0x40bb, 0x86a1, 0x850b, 0xb635, 0x4455, 0xecfc, 0x7399, 0xeb79, 0x1bf4, 0x3bee, 0x6db3,
    0xe66c, 0x06c0, 0xb482, 0xa54c, 0xb2b3, 0xea74, 0xe104, 0x1a49, 0x5952, 0x2deb, 0x3bac, 0xbb96, 0x5c68, 0xad63, 0xfa13, 0x0af2,
    0x979b, 0x22ab, 0x66d1, 0x075e, 0xbcca, 0x38af, 0xb2bb, 0xd1ac, 0xdb42, 0x6093, 0xde8a, 0x03bb, 0xcbab, 0xa4cb, 0xabb9, 0xa282,
    0x1938, 0x9773, 0xedda, 0xa750, 0x8505, 0x3594, 0x2c9a, 0x4683, 0xc73e, 0x56fe, 0xedb7, 0x5990, 0x51b1, 0x83bf, 0x8af6, 0x2551,
    0x8997, 0xc852, 0xdda4, 0xb769, 0xce3b, 0xd757, 0x34e9, 0x4bb4, 0xc687, 0xd994, 0x6775, 0x376e, 0xc374, 0xdaf3, 0xc97b, 0xe770,
    0xa9d4, 0xa708, 0x0d00, 0x676c, 0x73a6, 0x6d42, 0xe8a9, 0x2826, 0xef39, 0x5f8d, 0xee73, 0x54fe, 0x7855, 0xa878, 0x1f74, 0x4977,
    0xc8d2, 0x3b77, 0x875a, 0x2989, 0xc777, 0x402b, 0x3c85, 0x4370, 0xdcdb, 0x366a, 0xd20b, 0x5aef, 0xc4bd, 0xfbb6, 0xd6db, 0x72a8,
    0x0127, 0x5c32, 0xc8d6, 0xcbaf, 0x3679, 0xf685, 0x4f74, 0x1e2f, 0x303e, 0xc2d4, 0xe596, 0xacd4, 0x7f75, 0x395e, 0xf9b7, 0xb4e4,
    0x5d29, 0xfd15, 0x876d, 0x1369, 0x4776, 0x928a, 0xdc98, 0x4e37, 0x14cf, 0x01ac, 0xe417, 0x5753, 0x63af, 0x657d, 0x1819, 0xf5de,
    0xb2a6, 0x3357, 0xa3a0, 0x2f86, 0xea08, 0x361e, 0x81f3, 0x0993, 0x0701, 0x5ffa, 0x2b5e, 0x484e, 0x440c, 0xdfe7, 0xca4c, 0xba41,
    0x70e1, 0xd082, 0x0575, 0x3765, 0x244e, 0xf724, 0x33c2, 0x4ad6, 0x90e8, 0xd553, 0xe69d, 0xb8a2, 0xeb9d, 0xb7f4, 0xed24, 0x5da0,
    0xee5b, 0xda96, 0x4cb3, 0xba6d, 0x8188, 0xfcfb, 0xd518, 0x5cd7, 0x72d7, 0x7587, 0x9f95, 0xb665, 0x4a73, 0x7920, 0xd134, 0xd2c6,
    0x11d4, 0x3c6c, 0x69d7, 0xdaea, 0x772b, 0xbb8c, 0xe960, 0xec07, 0x560e, 0x64e7, 0x71a2, 0x0ba5, 0x07d5, 0x9c7c, 0xebcb, 0x5207,
    0x0fda, 0x1334, 0x7491, 0xf2a3, 0x95c7, 0xce31, 0x0126, 0xa576, 0x0123, 0x15c0, 0xa688, 0x8cc3, 0x0338, 0x95ba, 0xbb4e, 0x56d7,
    0xb393, 0xf4e7, 0x2732, 0xd3b3, 0x0c35, 0x5c28, 0x27f5, 0x44b9, 0x31d0, 0x64c9, 0xf9e0, 0x7bb2, 0x23ad, 0x01b8, 0xd454, 0x13b6,
    0x5279, 0xc8a6, 0x28ef, 0xc36b, 0x038d, 0x5dbd, 0xcbd1, 0x7da8, 0x7c36, 0x5598, 0x1888, 0xcfbf, 0xad18, 0xb251, 0x78c1, 0xbc80,
    0xbcbe, 0x2075, 0x428d, 0x1733, 0x5de6, 0x13ac, 0x6039, 0x4773, 0xc80f, 0x58bd, 0x05d4, 0xc026, 0xf836, 0xfe39, 0xbc6f, 0xd30b,
    0x7e64, 0xa5e1, 0xb069, 0x144e, 0x039a, 0x3f40, 0x1d63, 0x48ce, 0x44a9, 0x891a, 0x5dc7, 0xbb72, 0x44e1, 0x069b, 0x1580, 0x6944,
    0xb1ae, 0xc941, 0xda1c, 0xa984, 0x3ee2, 0x9243, 0xbd3e, 0x13f7, 0x713f, 0xebd3, 0x73d3, 0x569a, 0xfe7c, 0xe300, 0xe938, 0x0756,
    0x8556, 0xc193, 0xdc91, 0xa821, 0x7977, 0x6f37, 0x4fbd, 0x063b, 0xf9f1, 0x1a6a, 0x1292, 0xb6ee, 0x41da, 0xe5e2, 0xd1a5, 0x68a5,
    0x02b3, 0x0da3, 0x38db, 0x3dcf, 0x4ebc, 0x924d, 0x5c21, 0xf3a1, 0xf1bc, 0xf200, 0x4eb5, 0xed3d, 0x94b2, 0x7346, 0x67f7, 0x9312,
    0x32db, 0xcacf, 0xa727, 0x907b, 0xd7a9, 0xf194, 0x1dd2, 0x29d0, 0x3a90, 0x5f5e, 0x2645, 0x2704, 0x5471, 0xfad8, 0x6613, 0xb67a,
    0xda5b, 0x3efa, 0xcb9c, 0xe767, 0x77ee, 0x08e1, 0x8e64, 0x34f4, 0x6cef, 0x57b6, 0xb0ef, 0x9533, 0x8085, 0xf0d4, 0x9964, 0x8cfb,
    0x3f4a, 0xa577, 0xd281, 0xe349, 0xe359, 0x5133, 0x8aa0, 0x6f35, 0x2e03, 0xf98c, 0xb90a, 0xdf88, 0xac21, 0x3466, 0x3b5a, 0xc6e0,
    0xb15e, 0x8d14, 0x4ab0, 0xd4f9, 0xc1b4, 0xb995, 0x95c5, 0x297d, 0x759a, 0x3721, 0xe620, 0xc056, 0x8f4e, 0x9776, 0xceef, 0x6e6f,
    0x4e22, 0x505a, 0x92fc, 0xc972, 0x5c2e, 0x1e2d, 0x8fea, 0x48f0, 0x30a2, 0x6a44, 0x863d, 0xc223, 0x92d4, 0x86ee, 0xe55e, 0x9f6f,
    0x0faf, 0x8a38, 0x586a, 0x9677, 0xe102, 0x5d9a, 0x2377, 0xf850, 0x0ffd, 0x0206, 0x3bfa, 0x2874, 0xfb34, 0xc25e, 0x343c, 0xd79c,
    0xd203, 0xf565, 0x9ff1, 0x3115, 0x337e, 0x6d73, 0xdffa, 0x4443, 0xa5cc, 0xaa3b, 0x0bf8, 0xdef6, 0xf871, 0x4b61, 0x9aa7, 0xace1,
    0x6c28, 0x6081, 0x043a, 0x77fe, 0xa79a, 0xe1ac, 0x5fc4, 0x8701, 0x925c, 0x761a, 0x2dd9, 0x08e8, 0x9e6b, 0x30c4, 0xcb32, 0xa96b,
    0xf967, 0x99df, 0xf374, 0xfbd2, 0xc84e, 0xe13b, 0xe51f, 0x83e8, 0x2d98, 0xcb55, 0x112d, 0xfafe, 0x37fc, 0xfeef, 0xb100, 0xe45b,
    0x5a36, 0x2587, 0x2d6a, 0xfec9, 0xcd45, 0xab5e, 0xdfac, 0xf93f, 0x7040, 0xa901, 0x2868, 0xcc76, 0x6675, 0x88c8, 0xdbd8, 0xf187,
    0x2635, 0xab69, 0x5fe8, 0x1034, 0x18ee, 0x946e, 0x6882, 0xbb1f, 0xee2a, 0xd541, 0xfe02, 0xbdb7, 0xd05c, 0xe7cc, 0x2c2c, 0x0d0d,
    0x2058, 0x0a1b, 0xf10b, 0xc40c, 0xc2c2, 0xd0d0, 0x1e20, 0xbbc0, 0x96a8, 0x0b0c, 0x62fa, 0x4bf5, 0x9970, 0x7731, 0x7162, 0x019a,
    0x3a42, 0xda53, 0x91fa, 0x07eb, 0x43c9, 0x3658, 0x00a0, 0xfd2b, 0xec9f, 0xd6a2, 0x563b, 0x2820, 0x9221, 0x09bf, 0x5f7b, 0x42e6,
    0x44f0, 0x4a4d, 0xb55c, 0xd982, 0x6f6d, 0x9afd, 0x3ca1, 0x7d33, 0x56ec, 0x2f7b, 0xf8b0, 0x4686, 0x4c8c, 0xf94f, 0x62d2, 0xe6e2,
    0xbb51, 0x77e4, 0x5a9e, 0xeb7b, 0x3f33, 0x1549, 0x15ae, 0x50b0, 0x2131, 0x551a, 0x6d6d, 0x4545, 0xa023, 0x64b7, 0xb357, 0xfb1d,
    0x7575, 0x5050, 0x6cd8, 0x270f, 0x2163, 0xbe41, 0x0f48, 0x97d5, 0x9f46, 0x7960, 0xa27f, 0x64d5, 0xb347, 0x6ee0, 0x6b2c, 0x32a7,
    0xc98a, 0xebc1, 0xb868, 0x4a5c, 0xef23, 0x3e45, 0xfe00, 0x79af, 0xb37c, 0xbfab, 0x8908, 0x807f, 0xaf86, 0x5f10, 0x6fed, 0x4968,
    0x7f48, 0xcfb5, 0x0b58, 0x817d, 0x96de, 0x3ecb, 0x3811, 0x58ab, 0x0464, 0xdbfd, 0x57bd, 0xb64f, 0x5586, 0x23a1, 0x7c1f, 0xc241,
    0x071f, 0xb29c, 0xcbee, 0xf1ee, 0x8cb0, 0xc11f, 0x4598, 0xa792, 0x1a58, 0xb735, 0xb61e, 0x2140, 0x9054, 0x9f14, 0x0f05, 0x97a8,
    0x1eb6, 0x4021, 0x9eed, 0x3e15, 0x3e6d, 0x57a4, 0xb3df, 0x47a5, 0x6774, 0xed3c, 0x2f21, 0x6a09, 0xa9f0, 0x6cf7, 0x5f4c, 0x7ea9,
    0x5217, 0x0253, 0x65c3, 0xfafb, 0xf97a, 0xe5df, 0xef22, 0xb012, 0x8993, 0xcf00, 0xf4cf, 0x58ad, 0x6fc5, 0xce24, 0x91b2, 0x370f,
    0x5d12, 0x382b, 0x6a32, 0x51e3, 0xd4a7, 0xea7a, 0x815c, 0x9484, 0x2fd6, 0x01f4, 0x1aae, 0x43f5, 0xa4f7, 0xd35a, 0x560f, 0xc306,
    0xe36e, 0x4ceb, 0x1fbb, 0x8268, 0xd638, 0xa13d, 0xf893, 0x10e9, 0x3f35, 0x0594, 0x1919, 0x9a9a, 0x604c, 0x7caf, 0x4975, 0x6951,
    0x9191, 0xa9a9, 0x46f8, 0xc16a, 0xc418, 0xe422, 0x5554, 0xcd8c, 0x3177, 0x7099, 0xac8f, 0x72a0, 0x781f, 0x86b4, 0xfe08, 0x8465,
    0xea67, 0x5780, 0x6791, 0xe2ef, 0x8790, 0x669e, 0xc9ef, 0x1bd2, 0x7896, 0xd5aa, 0xe28f, 0xe09d, 0x86ec, 0x2b0d, 0x1fe2, 0x60d6,
    0xf46f, 0x12bf, 0xa1a3, 0x8502, 0x38a3, 0x678e, 0xd1c9, 0x26b6, 0xb5e0, 0xffa3, 0xb2ef, 0xaa53, 0xc742, 0xad16, 0x11d8, 0x8f52,
    0xc1fe, 0xa3d1, 0xc430, 0x6b9e, 0x9e4f, 0x37b2, 0xc1ba, 0xb0de, 0x6267, 0x4d7a, 0x1eb3, 0x2225, 0xbd3b, 0x811b, 0x45a5, 0xd525,
    0xb31e, 0x2522, 0x37f5, 0x7f16, 0x6310, 0x8b90, 0xbae2, 0xccca, 0x4344, 0xfadf, 0xf092, 0xd718, 0x28d1, 0xa273, 0x64b0, 0x4dc6,
    0x0af4, 0x6d25, 0x2c1f, 0x8698, 0xc39f, 0x3350, 0x27d4, 0xe971, 0x624b, 0x783f, 0xf48f, 0x8b7f, 0x626b, 0x9d1c, 0x1eba, 0x9e6f,
    0xdda0, 0x4cac, 0x2078, 0x060e, 0xa5ec, 0x21e0, 0xd2b0, 0xc86e, 0x0484, 0x9b27, 0x08d9, 0x2183, 0x0dcd, 0x9074, 0x5237, 0xc06f,
    0x27b4, 0xc71a, 0x8b29, 0xd973, 0x9d18, 0xd2f1, 0x3ced, 0x7467, 0x51cd, 0x90eb, 0x80ed, 0xa30a, 0x6531, 0x2e7b, 0xf95c, 0xf0e1,
    0x2e47, 0xa651, 0x6962, 0x40b2, 0x5cf9, 0xe1f0, 0xf254, 0xb308, 0xc0d2, 0xadb9, 0xc6a4, 0x6d35, 0xeef1, 0xeecb, 0x5083, 0x9ce3,
    0xda2d, 0x368e, 0x5e62, 0x69f8, 0x04f2, 0xb013, 0xc311, 0xd900, 0xd8de, 0xbe43, 0x3408, 0xa0e9, 0x3330, 0x8575, 0x47ec, 0x12ff,
    0x0ef8, 0x0e86, 0xf0ba, 0x874e, 0x7ef3, 0x61cb, 0xaa59, 0x21fc, 0x725b, 0x99a3, 0x9b9a, 0xf3b9, 0xb765, 0x7298, 0x19a5, 0x20c9,
    0xba83, 0xabbb, 0xedcf, 0x49d1, 0xf9cd, 0xb1ea, 0x7beb, 0x9e5a, 0xc192, 0x1937, 0x623b, 0xa44e, 0x775e, 0x752f, 0xa7a7, 0xc1c1,
    0x9acd, 0xe4cf, 0xc8de, 0x3e79, 0x7b7b, 0xc3c3, 0x02d9, 0x3729, 0x0ad4, 0xb34a, 0x7725, 0x5e31, 0x6079, 0x469f, 0x55c4, 0xfb90,
    0x2f5c, 0x6382, 0x5253, 0xdcc6, 0x9ea5, 0x1c4d, 0x0a8e, 0xf50e, 0x4088, 0xb3c2, 0xf642, 0x3754, 0xf701, 0x5c86, 0x6d48, 0x00e0,
    0x3bd5, 0x095b, 0x3611, 0xb9f8, 0x8678, 0xa3b0, 0x20c8, 0x7c1e, 0xcad6, 0x8bea, 0x25f7, 0x5f0a, 0x392a, 0x7a33, 0x246f, 0x64e8,
    0x6d7b, 0x643d, 0xa516, 0xb62c, 0x2cd5, 0xfe10, 0x0c06, 0x0f92, 0xccf9, 0x1ec1, 0x1927, 0x1860, 0x80fb, 0x432e, 0x5186, 0x6249,
    0xaa94, 0xca19, 0x43df, 0x9573, 0xc900, 0x6597, 0xbe59, 0xd5df, 0xc9ec, 0xddf8, 0x1cb1, 0xf75a, 0x8a6b, 0x41ae, 0x1935, 0xf1a8,
    0x4585, 0x3781, 0x8845, 0x6aa8, 0xa217, 0xd435, 0x42d5, 0xe322, 0x7faf, 0x021b, 0x6f93, 0xb423, 0x8663, 0x112b, 0xb6a9, 0x22fd,
    0xed50, 0x57ea, 0xa132, 0x191f, 0xa2c4, 0xae62, 0xc8ca, 0xb03e, 0x491e, 0x5ee9, 0xae96, 0x23e0, 0x4543, 0x91fd, 0x1a71, 0xbd08,
    0x34e5, 0xdeb1, 0xb36b, 0x5179, 0xc562, 0xb20f, 0x260c, 0x9ed5, 0x8629, 0x4406, 0x41a0, 0x4d07, 0xdba2, 0x849f, 0x6fa0, 0xcced,
    0x948d, 0x79b8, 0xbbc9, 0x444c, 0x2205, 0xf517, 0xcd95, 0xb0e7, 0x6c7a, 0xe32b, 0x1b37, 0x9c59, 0xcde1, 0x2bca, 0xd7d2, 0xfee3,
    0x60b9, 0xda19, 0xb95e, 0x52ea, 0xbc05, 0x6a83, 0xf534, 0x3e6a, 0x8b8a, 0xdc30, 0x2d32, 0xce41, 0xfc5e, 0x587e, 0x4729, 0x51e5,
    0x0c6a, 0xe067, 0x59d6, 0xff75, 0x9104, 0xe8dc, 0xe1d1, 0x6c71, 0x6247, 0x661f, 0x39d5, 0x2cab, 0xaae8, 0x001d, 0x29c5, 0xf04a,
    0x34c7, 0x2a0c, 0x70f7, 0x6710, 0xc7c0, 0xea2b, 0x01ce, 0x9c50, 0xd568, 0xf84a, 0xc9de, 0x363a, 0x4bb0, 0x17a0, 0x32b8, 0xd956,
    0xc410, 0x32ab, 0xa452, 0x10ed, 0xe3b3, 0xdd2d, 0xb67d, 0xb042, 0xd1b5, 0x993c, 0x4e40, 0x468c, 0x44c2, 0x48d7, 0xf3aa, 0x6f3e,
    0xd475, 0xb2df, 0xf7f2, 0xecf3, 0x14b7, 0x82b7, 0xf97b, 0x79f6, 0x2c26, 0xbf4e, 0x41b9, 0xf59e, 0x7b39, 0x8fb3, 0xdc32, 0xb0a6,
    0xc4e5, 0xfe68, 0xbee6, 0xf143, 0x783b, 0x3cc3, 0x8391, 0xfc3a, 0xca77, 0x6e60, 0xf72f, 0xd612, 0xa3b1, 0x3398, 0x15cc, 0x8127,
    0x3dd3, 0xd30f, 0xd123, 0x1e33, 0x7574, 0xa650, 0xa451, 0xa00e, 0x9e2f, 0x73db, 0xf74c, 0x4c3f, 0x06c8, 0x8e18, 0x65c5, 0x9e3b,
    0xe331, 0x123d, 0xbaf5, 0xa895, 0x7d47, 0xa10d, 0xdfd7, 0x1b2e, 0xf4c3, 0xcf74, 0x448f, 0x78cc, 0xc2a1, 0xca2e, 0xca68, 0xe8fe,
    0xe5bd, 0xcda8, 0xed8e, 0xc011, 0xb0be, 0x2fa4, 0xd120, 0x1ac3, 0xf819, 0x831a, 0x7686, 0x582e, 0x5cc1, 0x1278, 0x6371, 0x1646,
    0x4e75, 0xcb2a, 0x8b4c, 0x7390, 0x26d5, 0x07a1, 0x4b71, 0x2b78, 0x65b8, 0x4d61, 0x1f73, 0xb679, 0x71a3, 0x14f0, 0xd335, 0xf6d4,
    0xbbd1, 0x1896, 0x9fa3, 0x71c9, 0x12a0, 0x6418, 0x413d, 0xb918, 0xedc5, 0x531e, 0x43d1, 0xe5a4, 0x2698, 0x026b, 0x3074, 0xc077,
    0xd728, 0xaad3, 0xb936, 0x1beb, 0xd753, 0x3ea5, 0x43b0, 0xc5f6, 0xb2fe, 0x7a2d, 0xae85, 0xb9a4, 0xe0b1, 0x8ef1, 0xce7a, 0x2b29,
    0x4792, 0xba57, 0x8d3c, 0x53df, 0xe3f4, 0x74a7, 0x85df, 0x94cf, 0x6241, 0x1f48, 0x8bc1, 0x0fed, 0x8b7b, 0x4023, 0x0ee0, 0x0cd8,
    0x993f, 0x1040, 0x6b55, 0x851f, 0x7ef6, 0xd37d, 0x81ac, 0xcdd8, 0xad0c, 0xc634, 0xaa1a, 0x1162, 0x7982, 0xec8b, 0xa9be, 0x31fa,
    0xbac2, 0x9819, 0xed60, 0xeb70, 0x18cc, 0x1d47, 0x4650, 0x974c, 0x0f3e, 0x6410, 0xca0b, 0xd2b7, 0x8cf3, 0x1b39, 0xd397, 0x5ee6,
    0x75df, 0x69ec, 0xbec0, 0xac05, 0x5423, 0x4217, 0x4e62, 0x4e96, 0xf1e4, 0x00b9, 0x8067, 0xc9c4, 0xe44b, 0x6de1, 0x249f, 0x536b,
    0x5918, 0x8dc5, 0x1a2d, 0xe3af, 0xb161, 0x1ef6, 0x14a7, 0x2bc1, 0x666b, 0xe9df, 0x2dc5, 0xade0, 0x8b70, 0x2cf3, 0x0de1, 0x5ec0,
    0x49e0, 0x7305, 0xe57d, 0x0347, 0x3942, 0xf5fa, 0x0d6c, 0x3146, 0xd698, 0x5655, 0x9b54, 0x1e84, 0x0daa, 0x16f0, 0x14df, 0xc66b,
    0xb655, 0x0cae, 0x9bcf, 0xbcea, 0x4da6, 0xb4e2, 0x9825, 0x1fa1, 0x2dbb, 0xc394, 0xc8f2, 0xa9a1, 0x0721, 0x076e, 0xd38a, 0x3699,
    0x98a4, 0xfb54, 0xb17e, 0xa00f, 0xfa11, 0x8259, 0x2277, 0xd7c9, 0x31f0, 0xfa8a, 0xf8ec, 0x774b, 0x9369, 0xad38, 0x7e84, 0x6096,
    0x2596, 0x2770, 0x266c, 0x1828, 0xa7f6, 0x1f88, 0x4c34, 0xe5e0, 0x28b1, 0xab98, 0xe885, 0x750d, 0x9fbd, 0x74df, 0x38fd, 0xdd29,
    0x2f42, 0x469c, 0x48bf, 0x6daa, 0x8c7e, 0xaa6f, 0x0336, 0x03b8, 0x824f, 0xa6f0, 0x4f60, 0x24f6, 0x76f0, 0x8679, 0x7d16, 0xb6e2,
    0x28bb, 0x0a87, 0xe85e, 0x0bad, 0x55fb, 0x8a95, 0x980d, 0xfeda, 0x1a67, 0x5c99, 0xd5d1, 0x9942, 0x9024, 0xb0d7, 0xe458, 0x30c7,
    0xa3fb, 0x29a3, 0x8c6d, 0x76d1, 0xa309, 0x6d6c, 0xc393, 0xd567, 0xce37, 0xef1c, 0x9146, 0x803a, 0xfabf, 0x734d, 0xc834, 0xc2f0,
    0xf48b, 0xa6da, 0x3037, 0x3be5, 0x1771, 0x2a05, 0x6347, 0x3067, 0xe3a9, 0x457e, 0x08e0, 0xc776, 0x4d09, 0xc763, 0x2de4, 0x1dae,
    0xf072, 0x1a26, 0x68f8, 0x8296, 0xb49a, 0x673b, 0x8cbc, 0xa9e0, 0xd305, 0x9873, 0x128b, 0x8ab9, 0xe730, 0x0ba6, 0x1c9b, 0x78e4,
    0xf873, 0x066a, 0x2879, 0x06cb, 0x7d94, 0xfde4, 0x4226, 0x6385, 0xce72, 0xf9b5, 0xc8bc, 0x9be8, 0xef6a, 0xd7a1, 0x51c7, 0x3306,
    0xbeaf, 0x728b, 0x7b16, 0xf855, 0x27c9, 0xdad4, 0x6803, 0x2603, 0x0af0, 0xfd4c, 0xf33b, 0xff2c, 0x967c, 0xc1ef, 0xeab9, 0xc5bb,
    0xc977, 0xefd1, 0xd8e4, 0x23c7, 0x7c8c, 0xf2c9, 0xec49, 0xc09e, 0x82fb, 0x35f5, 0x0064, 0x41d8, 0xa11d, 0x7c9b, 0xadf5, 0x48f5,
    0x474b, 0x9f74, 0x5465, 0x4731, 0x7c93, 0x7f60, 0xf602, 0x6f08, 0x7fb9, 0x96b0, 0x95b8, 0x73d0, 0x6ba6, 0xa9ed, 0xc228, 0x4328,
    0xcb0e, 0x1e4c, 0x1fdf, 0x1f2b, 0xc73b, 0x8df3, 0xdf8d, 0x9ecc, 0xeec4, 0xc6e5, 0xae54, 0x149b, 0x858d, 0x3e95, 0xef7e, 0x74e6,
    0x7ea2, 0x346d, 0xd02a, 0x5c14, 0x0833, 0xecbc, 0x9c3d, 0x6f3a, 0xe34e, 0xdaa9, 0x09e1, 0x6b92, 0x62cb, 0x516a, 0x17ba, 0xeb42,
    0x9c52, 0x04af, 0xe62b, 0x6152, 0xd4fe, 0x03f1, 0xe296, 0xf056, 0x0995, 0xc8f8, 0xcaad, 0x2982, 0x1f6c, 0x4928, 0x9fcc, 0x2008,
    0xd9f7, 0x804b, 0x6b60, 0x8a31, 0x8248, 0x6e74, 0x3a25, 0x5073, 0x7a26, 0x9592, 0xc05b, 0xa836, 0x54db, 0x7e91, 0x19b5, 0xbcb7,
    0x58d8, 0xe953, 0xec22, 0xb3ae, 0x514e, 0x9317, 0xb709, 0x548c, 0x06db, 0x6176, 0xed42, 0x1c67, 0xb80f, 0xe432, 0x29a4, 0xce56,
    0x0abb, 0xd5f3, 0xcd03, 0xf3f1, 0x3dd4, 0x8302, 0x9be5, 0xfd5d, 0x8e9d, 0x9037, 0xc3d9, 0xf3a6, 0x0574, 0x9676, 0x9272, 0xe387,
    0x65c4, 0x30c6, 0x9053, 0x752e, 0xb414, 0xc347, 0x1d84, 0x0640, 0xa826, 0x160b, 0x9067, 0xd1fb, 0xb4c5, 0xf41f, 0xc0f0, 0xd9ec,
    0x18f9, 0x93e5, 0xa7c3, 0xb797, 0x8a05, 0xbb66, 0xb6f3, 0xc559, 0x2eaa, 0x68aa, 0xb9f9, 0x7771, 0xf749, 0x74b4, 0xd7e1, 0x8c1c,
    0x1429, 0xb67f, 0xbdf9, 0xad09, 0x6931, 0x7173, 0xf7aa, 0xc9f6, 0x1d85, 0x33c4, 0x1911, 0xceac, 0x2764, 0x9df0, 0x2709, 0x4a22,
    0x9080, 0x64f3, 0x7dae, 0xfa43, 0x6d21, 0xab82, 0x7a05, 0x92b6, 0xc290, 0x460f, 0xa765, 0xd3f5, 0x9d0c, 0x8de4, 0x77d9, 0x29d5,
    0xafbc, 0x68e0, 0xae21, 0x34f9, 0x7887, 0x4bd3, 0x6337, 0xb206, 0x602c, 0xaefa, 0x3b42, 0x36f9, 0xe76c, 0x9356, 0x2777, 0xa682,
    0xa57e, 0x0ed5, 0x9538, 0x9a3c, 0xbd25, 0xc27c, 0x9cb8, 0xcd1f, 0x1ef9, 0x50cd, 0x07d6, 0x1959, 0xee2d, 0x8d00, 0x84c0, 0x43aa,
    0x3091, 0x35d2, 0xde16, 0x44be, 0x4b3a, 0x3f5a, 0xab40, 0x5170, 0x5e92, 0xa842, 0xae88, 0x04ad, 0xd3b8, 0xaa76, 0xf942, 0xb7e0,
    0xbc99, 0x9b85, 0x7bb7, 0xb99c, 0x7280, 0x57e7, 0xcac7, 0xf7c7, 0x74c9, 0x6504, 0x1427, 0x7380, 0x971b, 0x13bb, 0x9ba9, 0x7a67,
    0xcfa2, 0x56dc, 0x82b9, 0xf024, 0xa1aa, 0x1621, 0x5897, 0xecc4, 0x08ad, 0xf022, 0xf687, 0xe0c5, 0x10d8, 0xfd7b, 0x8cc8, 0x82f3,
    0xf2a8, 0x94a3, 0x90c7, 0xa909, 0x6cb9, 0xad4e, 0x6799, 0x5b84, 0x3157, 0x6251, 0x36cf, 0x63ee, 0xd75b, 0x4459, 0x7924, 0xa57b,
    0xde13, 0x1a8c, 0xb102, 0x0c85, 0xea46, 0xf80d, 0x4c5a, 0x5cdc, 0xba72, 0x4158, 0x5edb, 0x0f59, 0x8694, 0xf907, 0x82b1, 0xa324,
    0xd6bd, 0x2c47, 0x8403, 0xd21e, 0xea95, 0x9f08, 0xb66a, 0xb362, 0x253d, 0xd2cb, 0x8480, 0xb5fb, 0x754a, 0xf65d, 0xd98e, 0x050d,
    0xfde8, 0x33c8, 0xe04e, 0x2c4b, 0x56c6, 0x520c, 0x2950, 0x88bb, 0x6a87, 0xbf52, 0x0baa, 0x1044, 0x8b94, 0xadbd, 0x9f18, 0xf569,
    0x6191, 0xc10b, 0xca11, 0xafd7, 0xdaef, 0x5480, 0x6bad, 0x54f6, 0x7d61, 0x485f, 0x1c17, 0xec0c, 0xfd96, 0xaea3, 0x2c66, 0xea61,
    0x2c1b, 0xe4a1, 0x3159, 0x783d, 0x1738, 0x11df, 0xd6d1, 0xcf33, 0xc3f8, 0xec6d, 0x4535, 0x4778, 0x6a43, 0x0700, 0x7d10, 0xa3fc,
    0x2ac7, 0x7620, 0xc190, 0x6c84, 0x83e5, 0xd310, 0x4844, 0x03fc, 0x89a3, 0xd4b3, 0xc02b, 0x33f5, 0x7fde, 0xe04a, 0xdc8b, 0x8602,
    0xc881, 0xfafc, 0x5967, 0xd7fd, 0xcd6c, 0x3bfd, 0xcfc4, 0xdea8, 0xb5c3, 0xbc85, 0xd25a, 0x030a, 0xa6f7, 0xb77f, 0x05ec, 0x10de,
    0x6d6b, 0x7d46, 0x3728, 0xb3de, 0xaf5f, 0x2394, 0x5abf, 0x7dad, 0xc370, 0x2a2e, 0x3568, 0x3612, 0xe844, 0x2a19, 0x2562, 0xcc70,
    0x1453, 0x1d0e, 0x22f1, 0xfcb1, 0xe925, 0x842a, 0x8633, 0xc761, 0xe0f3, 0x0641, 0xbcfa, 0xa619, 0x4397, 0x2835, 0xee39, 0x48d3,
    0x46d8, 0x6949, 0x0bec, 0x5ac0, 0x3db1, 0x4514, 0x8cf1, 0x4752, 0xebf1, 0xb5ab, 0x23e6, 0xe168, 0xd34d, 0x7de7, 0xbb77, 0x99cb,
    0x4f1d, 0xf22b, 0x569f, 0xf189, 0x5509, 0xb0a4, 0x526f, 0x42a7, 0x10b9, 0x7311, 0x39ff, 0xc3c0, 0x89ff, 0x075b, 0x19d8, 0x2e38,
    0x0e1c, 0xf146, 0xcb02, 0x13fc, 0x5184, 0x5086, 0xbb82, 0x34dc, 0x4805, 0xaefd, 0xcbd9, 0x9c7d, 0xa989, 0xf826, 0xe03a, 0x1bfc,
    0xa551, 0x1213, 0xc096, 0x96c0, 0x8f32, 0x1a9d, 0x60e6, 0xc490, 0x328d, 0x7239, 0xb69b, 0x5a27, 0x88a0, 0xde84, 0xfa50, 0x1a4e,
    0x6eb7, 0x0af7, 0xbd22, 0xf369, 0x2d9e, 0x84a2, 0x106d, 0xb44c, 0x87f2, 0xf287, 0xf270, 0x86cd, 0x0d39, 0x2606, 0xbb9b, 0x6ed6,
    0x5a8b, 0xb27f, 0x03c0, 0x6561, 0x1ad4, 0x0b0e, 0xcc1b, 0x7b41, 0xc722, 0x3986, 0x13c1, 0x2935, 0x49cb, 0xa287, 0xf44b, 0x91f0,
    0xa080, 0x58ed, 0xf64e, 0xd1b1, 0x77b1, 0xd190, 0x40df, 0xdb99, 0xae5f, 0x9cc0, 0xd572, 0x660b, 0x0763, 0xc24e, 0xd74b, 0xf935,
    0xd159, 0x818b, 0x51f1, 0x555b, 0xd990, 0xbaf7, 0x0010, 0xfed7, 0x061c, 0x117f, 0x111d, 0x8510, 0x8e6a, 0x875c, 0xba06, 0xeee7,
    0x0355, 0x9989, 0xc7e1, 0x852d, 0xc572, 0x6db8, 0x82a4, 0xf8a4, 0x5b55, 0xf151, 0x739e, 0xfc69, 0xff83, 0xc4a7, 0x9a59, 0x192d,
    0x2ff8, 0x88b7, 0xfa38, 0xfd73, 0xe259, 0x56ab, 0xd6fe, 0x8496, 0x7865, 0xdf66, 0xfb5b, 0x5a12, 0x184c, 0xab3d, 0x4afc, 0xd1bf,
    0xb2cf, 0xb7a5, 0x9a4a, 0x183e, 0x8a3f, 0x8277, 0x92e3, 0x473f, 0xafe5, 0x25bf, 0x37ca, 0xa917, 0xe96d, 0xb3ec, 0x140a, 0x868e,
    0x2fd5, 0x8be9, 0x1f72, 0x8ab8, 0xee2c, 0xf825, 0xf00b, 0xad9b, 0xc683, 0xaf1e, 0x7fa1, 0x40d0, 0x76d2, 0x57d0, 0x0677, 0x60af,
    0x2c30, 0x5aa2, 0x02dd, 0xac93, 0x14e3, 0x48c3, 0xd124, 0x6f97, 0xf44f, 0xac9a, 0x98d4, 0xada6, 0x9bad, 0x0bf0, 0xb70d, 0xae58,
    0x92d2, 0xb08d, 0x5218, 0xc1e8, 0x991b, 0x383a, 0x003c, 0x1656, 0x6cae, 0x873d, 0xb594, 0x538d, 0x7cd2, 0x294c, 0x685d, 0xf742,
    0x27d0, 0xb24f, 0xc9b5, 0xdf58, 0x84e2, 0x700e, 0x1ceb, 0xe033, 0x095c, 0xfbcf, 0xa87b, 0x0506, 0xfae5, 0x09cc, 0x4f73, 0x6f34,
    0xd1a9, 0x28f3, 0x1632, 0xe41b, 0xb23e, 0xca81, 0xe4cc, 0xcce4, 0x93ce, 0xba0c, 0xb415, 0xad3f, 0x2751, 0xa5db, 0x09a2, 0x7eec,
    0x2395, 0x69b9, 0xe816, 0x9d64, 0xc5dc, 0xc265, 0xa368, 0x8155, 0x357b, 0xb1df, 0x66ed, 0xbbb9, 0xdb6d, 0x6ddb, 0x33ad, 0x8dbb,
    0xe80a, 0xed2c, 0xac96, 0x6721, 0x1e35, 0xa326, 0x2565, 0x59cf, 0x6288, 0x40f6, 0xb738, 0xa88e, 0x676e, 0x7d03, 0x1774, 0x7e7a,
    0xcd13, 0xb976, 0x9699, 0xfb4d, 0x7593, 0x9d28, 0x2d27, 0x1e8a, 0xebcc, 0xfdcd, 0x576b, 0xe3d7, 0xe366, 0x338b, 0xf00c, 0x9938,
    0x2122, 0x497c, 0xfc97, 0xffbd, 0x1681, 0x3eb4, 0xfd98, 0x4e77, 0x0592, 0x4b13, 0x8837, 0x6353, 0xd4df, 0x59fc, 0x5503, 0x8999,
    0x6771, 0x2fc1, 0x3d2a, 0x9efd, 0x1d11, 0x1085, 0xe935, 0x9d89, 0x3814, 0xd8dc, 0xbdd8, 0x0ea2, 0x774e, 0x98fd, 0x3419, 0x282b,
    0x26fc, 0x4886, 0x2f64, 0x4375, 0xffe2, 0xaacb, 0x973c, 0x43fd, 0xc39b, 0x9457, 0xbdb5, 0x6bf6, 0x298e, 0x8e20, 0xd50d, 0x90bd,
    0x0b99, 0x7ded, 0x5af4, 0xfd65, 0xf54e, 0x56c2, 0x6a4b, 0x3a77, 0x53bd, 0xb095, 0xf284, 0xf4cd, 0x5760, 0x72ad, 0x21af, 0x88b1,
    0xa992, 0xa700, 0x7553, 0xd3c1, 0xf752, 0xe775, 0x9685, 0x8596, 0x8770, 0x2997, 0x3773, 0x2af6, 0x076c, 0x1855, 0x9bb6, 0x275a,
    0xa500, 0xaf8f, 0x9979, 0xf87a, 0xb76e, 0xf70a, 0x7828, 0xbd44, 0xaaf1, 0x866c, 0xc2aa, 0x4bb9, 0x798b, 0x8b79, 0x9372, 0x902d,
    0xfcd6, 0x12d7, 0x04e7, 0x8960, 0x1bb2, 0xac34, 0x6e31, 0x4688, 0xa755, 0x51ae, 0x45e1, 0xb57f, 0x636b, 0x4d18, 0x9e39, 0xe28c,
    0x9850, 0xaffc, 0x0a44, 0x2fea, 0x7f88, 0x8359, 0x5995, 0x8620, 0x08a5, 0x2556, 0xada2, 0x07f7, 0x8767, 0x2085, 0x9ad8, 0x4727,
    0x0668, 0xc589, 0x22c9, 0xc922, 0x0a70, 0x2a99, 0xacd9, 0x4cfe, 0x5ba7, 0xb4e9, 0xa209, 0xec7e, 0x2aed, 0x8c6e, 0x3c0a, 0x0b8f,
    0xdcc5, 0x65c2, 0xa6d9, 0xe5bc, 0x42a6, 0x6336, 0xf578, 0x1e34, 0xcbb4, 0xb4cb, 0x63b8, 0x51ba, 0x23b6, 0x44ea, 0x94bb, 0xac2a,
    0x1fc2, 0xa59a, 0x0c83, 0x0254, 0x136e, 0x18a9, 0xcdaa, 0xadbf, 0x1029, 0xa8bf, 0x230e, 0x4e3c, 0x6735, 0x7077, 0x9775, 0x63ae,
    0x0b75, 0xd91c, 0xb946, 0x569d, 0x6450, 0xf5e3, 0x98d0, 0x8f42, 0xa69c, 0x3bd6, 0x5758, 0x3303, 0xf986, 0x1944, 0x63f9, 0xe245,
    0x06f1, 0x6a6c, 0xb8a7, 0x35e5, 0xf823, 0x1196, 0x563d, 0xbf39, 0x3d40, 0x4203, 0xe314, 0xc348, 0x8dd1, 0x5da5, 0x43a4, 0xe24f,
    0x7706, 0xaf60, 0x067d, 0x4adb, 0xe07d, 0x1ad2, 0x79d2, 0x4197, 0xe535, 0xa7b8, 0xdcfd, 0x40d7, 0x376a, 0x8efc, 0x84f6, 0x58e3,
    0x2f8b, 0x498f, 0x16e3, 0x8468, 0x334c, 0xf579, 0xbf37, 0xa135, 0x1059, 0x8723, 0xbe71, 0xe778, 0x24fc, 0xdd16, 0x797f, 0x0998,
    0x1226, 0xba46, 0xef71, 0xd6f0, 0x1975, 0xa05c, 0x98f2, 0x6e2f, 0x7876, 0x5208, 0x279f, 0x1261, 0xe679, 0xda3a, 0x4853, 0xad9c,
    0x6fcb, 0x3406, 0xd5a4, 0xdb39, 0xe0e1, 0xaaae, 0xf001, 0x8f14, 0x448c, 0xc107, 0xf526, 0x742a, 0xefb3, 0x9700, 0x86c0, 0xebdf,
    0x9a98, 0x6f82, 0x10a7, 0xab19, 0x4ca8, 0x47c6, 0x9d5a, 0x72d9, 0x2e27, 0x47f3, 0x2802, 0x8169, 0x0f2e, 0x3c33, 0x7889, 0x666d,
    0x920e, 0xa1b9, 0xff29, 0x8991, 0x9163, 0xc31c, 0x49c1, 0x6616, 0xc3e6, 0x2c3c, 0x13a0, 0x6f53, 0x254d, 0x1f0c, 0x559f, 0x0e4f,
    0x1f4f, 0x60fc, 0xd53f, 0x7b33, 0x4092, 0xc35e, 0x25b5, 0x3b9d, 0x16bc, 0x7ff4, 0x0e08, 0x3520, 0x4818, 0x3483, 0xb5b1, 0x8c26,
    0xf234, 0x7d4f, 0x1a95, 0x9b8e, 0x30cf, 0x0ede, 0x0673, 0x3476, 0x12e0, 0x7df6, 0x6a75, 0x65cb, 0xb288, 0xb7ae, 0x8bf2, 0x69c2,
    0x025c, 0xcfbe, 0xab72, 0x608a, 0x3697, 0x0964, 0x4cf4, 0x252b, 0xda22, 0x57f3, 0xd318, 0x32b4, 0xba60, 0x730e, 0x0cb7, 0x29ac,
    0x655b, 0xcae0, 0x7b48, 0x0e10, 0x7a4c, 0x597c, 0x089b, 0xfc5c, 0x9a49, 0x2fe9, 0xd9f6, 0xc10a, 0xe1d0, 0x3145, 0x6f6c, 0x21df,
    0x5e80, 0x2ec1, 0x37db, 0x1ac6, 0xe2b7, 0x1267, 0x8e16, 0x623e, 0xcae9, 0x6105, 0x8ecf, 0x74b7, 0x089c, 0x55ac, 0xd1c1, 0xdcc8,
    0x7283, 0x3deb, 0x734e, 0x9439, 0x9cc3, 0x2e98, 0xadeb, 0x2ca2, 0xd39a, 0x9051, 0x60ab, 0xd83b, 0x07ee, 0xf45f, 0xa814, 0x5dc4,
    0x327e, 0x74ae, 0xbb14, 0x8e8b, 0x726c, 0xe391, 0xa82c, 0xd952, 0x06c9, 0x4904, 0x5c3b, 0xc85b, 0x133d, 0xc94a, 0xc19c, 0x8d1d,
    0x53b7, 0xf6a5, 0x601a, 0xde81, 0x3b97, 0x407b, 0x5144, 0xdb13, 0xeed1, 0x1ee7, 0x95e6, 0x4f1b, 0x91b3, 0x38cf, 0x4475, 0xb9c5,
    0xa601, 0x1de8, 0x24ae, 0xb271, 0x1d73, 0xbbac, 0x64e9, 0x24e6, 0x5e69, 0xf1b4, 0x1a8a, 0x34a6, 0x8d34, 0xe39e, 0x5657, 0xc27e,
    0xce60, 0x8ec6, 0x2d64, 0x293c, 0x9068, 0x618d, 0x1c0d, 0xf795, 0x3448, 0xc6b0, 0x52dc, 0x0ade, 0xd8d1, 0xcc19, 0x232f, 0x2a78,
    0x049e, 0x5730, 0x053c, 0xdc68, 0xf1d8, 0x5342, 0x82e9, 0x39cc, 0xdd9c, 0xa7e5, 0xe5ef, 0xe7d9, 0xad99, 0x7fa7, 0x3613, 0x140c,
    0x8af2, 0x7378, 0xe127, 0xb6e8, 0x5b78, 0xf912, 0x46ce, 0xe33c, 0xefde, 0x0091, 0xb4cc, 0xda6f, 0xeeb2, 0x75cc, 0xb458, 0x1bb0,
    0xc684, 0x7a14, 0x1511, 0x03b2, 0x3d1e, 0x42bf, 0x11d5, 0xe716, 0x7365, 0xec39, 0x0983, 0x67b5, 0x9398, 0x93a5, 0x1194, 0x25d3,
    0x1cbc, 0x8986, 0xcf3e, 0x7f2f, 0xa8f9, 0xd3d4, 0xc389, 0x585a, 0x89d9, 0x2eb1, 0x2d24, 0x94fd, 0x2e5b, 0x53ab, 0x6644, 0x179c,
    0x0580, 0x40ca, 0x57cc, 0xa4c2, 0x556e, 0x4c11, 0xbce0, 0x3223, 0xe606, 0xa77c, 0xddb1, 0x3802, 0xa8d7, 0x416d, 0xa2ab, 0x7400,
    0xf93c, 0x0893, 0xe159, 0x4420, 0x5747, 0x650a, 0x0da0, 0x0c98, 0x7931, 0xe514, 0xa743, 0x5d78, 0x7a52, 0xe6d1, 0xdb45, 0x31b6,
    0x424a, 0xae40, 0x7e38, 0x2927, 0x699c, 0x7265, 0x1f3e, 0xaadf, 0x882f, 0xc357, 0x9a7b, 0xa379, 0x875e, 0xabbd, 0xa68c, 0x8fee,
    0x2074, 0xeb83, 0x2ccf, 0xcba2, 0xc0da, 0x0a58, 0x70ed, 0x216f, 0x5b95, 0x0453, 0xdc22, 0x3ccb, 0x50e6, 0xcd39, 0x3905, 0xe752,
    0x518c, 0x5b03, 0xe705, 0x9119, 0xa2ea, 0xa68a, 0x1b24, 0x2411, 0x92ab, 0xa549, 0xb8af, 0xaa60, 0xf7ac, 0xca0d, 0x1017, 0xb1e7,
    0xd8e8, 0x277b, 0x356c, 0x6bb1, 0x3d2e, 0x84fa, 0x7fa5, 0x0014, 0xb36f, 0x32bc, 0x914a, 0x43b4, 0x207c, 0x19a9, 0xf4d3, 0xe523,
    0xe12b, 0x55a3, 0x1047, 0xc714, 0x764a, 0x167e, 0x0013, 0x089a, 0x51ad, 0x7864, 0x1043, 0xcaac, 0x2cf2, 0xfc5d, 0x9e6e, 0x5f7a,
    0x780a, 0xd1b8, 0x2b23, 0xfac0, 0x4c17, 0x61ce, 0x522d, 0x5b43, 0xfb3c, 0xbdfc, 0xfc50, 0xafb9, 0x060a, 0x099b, 0x9b6a, 0xd22f,
    0x8b09, 0xafd3, 0xf29d, 0x1b98, 0x4a2c, 0x2ae6, 0xe093, 0x29bc, 0xac44, 0x8e19, 0x7853, 0x27c1, 0x9acf, 0xff85, 0xef94, 0xc0dc,
    0x327b, 0x377e, 0x733e, 0x47b0, 0xacbf, 0x5e8b, 0x7b71, 0x94c7, 0x8a0c, 0xbc7e, 0x0e95, 0x87e0, 0xda86, 0x3710, 0x07b2, 0x1443,
    0xabec, 0x36f2, 0x2ed7, 0xa279, 0x83bb, 0x39ab, 0xc710, 0x2470, 0xe55c, 0xd0f7, 0x2d8b, 0xa945, 0xc6fa, 0xae4d, 0x5c72, 0xe7e8,
    0xb981, 0x29df, 0x6276, 0x4bac, 0xcb89, 0xd1fc, 0x1123, 0xf041, 0x9cf8, 0xebba, 0x51d7, 0xcb7e, 0x471e, 0xfe40, 0x963a, 0x3187,
    0x584b, 0xdcbf, 0x24cc, 0xec92, 0x93bc, 0x8d17, 0xe6d8, 0xff38, 0xa930, 0x15f3, 0xdfcb, 0xb3cf, 0x6ac6, 0xc429, 0x76ce, 0x3569,
    0xdace, 0x2bba, 0x5f3d, 0xabb0, 0x7447, 0x094a, 0xbb47, 0x7b9c, 0x11ec, 0x9ccf, 0x689e, 0xcbb5, 0x77a0, 0x9806, 0x6c9c, 0x892b,
    0x2283, 0xaf1f, 0x3957, 0xf43d, 0x7bb4, 0xc7b9, 0x579a, 0x3c6d, 0xc671, 0xd42e, 0x9ba1, 0xe995, 0xc9c6, 0x92b8, 0x5c61, 0x7aca,
    0xa5ba, 0x574d, 0xbdf7, 0x8c8e, 0x8b18, 0x1af2, 0x5228, 0xff6c, 0xdaaf, 0xac54, 0x29b7, 0x924a, 0x2fe1, 0xfec6, 0xac3f, 0x72cd,
    0xd3db, 0x1abd, 0x39a6, 0x6150, 0xb7c5, 0x3eac, 0x2d86, 0xc4c7, 0x2913, 0x242b, 0x87db, 0x7d23, 0xbe23, 0x702e, 0xacba, 0xfe2f,
    0x2c19, 0x7193, 0xaf1a, 0x66c8, 0x9405, 0x353f, 0x5c5c, 0x9696, 0x068a, 0xdfa4, 0x8926, 0x7cbb, 0xee18, 0x6e94, 0xdac9, 0xa71d,
    0x33e8, 0x56da, 0xfe3b, 0xf927, 0xdb04, 0x5807, 0x6271, 0x9a01, 0x5537, 0x3c1d, 0xec8d, 0x93e7, 0x6969, 0xc5c5, 0x6ac1, 0xf846,
    0xb87d, 0x37d2, 0x785f, 0xa91d, 0x12df, 0x0452, 0x000e, 0x86d4, 0xc73a, 0xf80c, 0x000f, 0x8595, 0x2634, 0xa3d0, 0xb36a, 0xeb6f,
    0x0273, 0x7eb9, 0x0a53, 0x9f34, 0x0651, 0xbe61, 0xdc1d, 0x59cd, 0x211f, 0xe15b, 0xaa5b, 0xd574, 0x0a3b, 0x8867, 0xa2e5, 0xf96f,
    0x37a1, 0x2228, 0x8981, 0x434e, 0x167f, 0xf537, 0x663f, 0x9dd3, 0x3310, 0x2fc4, 0x73fb, 0x7452, 0x32cb, 0x6ba9, 0x057b, 0x33b8,
    0xd2ac, 0xb502, 0xabb8, 0x0755, 0x1a46, 0x18a7, 0x7e33, 0x736d, 0x9839, 0x3124, 0x441b, 0x2d13, 0x3f66, 0xd39d, 0x7a4d, 0x6762,
    0xc2f1, 0x0472, 0x2fe4, 0x9792, 0x56fa, 0x4179, 0x0896, 0x704e, 0x0492, 0x1af6, 0x6239, 0xb5ee, 0xd432, 0x7269, 0xcae4, 0x38d3,
    0xd6a6, 0x3e49, 0x095f, 0xad1a, 0x00bd, 0x825d, 0xd313, 0x4332, 0x723d, 0xca85, 0x65c6, 0x8b7d, 0x6255, 0x508a, 0x30ca, 0x492c,
    0x08b3, 0x54f2, 0x6f7d, 0x53cb, 0x010e, 0xa6aa, 0x7884, 0xe05e, 0x212f, 0x096a, 0xebda, 0xdd47, 0xaff3, 0xb5ce, 0x6fc6, 0xae6d,
    0x3f23, 0x2eb8, 0x1f07, 0x9cb2, 0x7a34, 0x3fd8, 0xff24, 0x7fc7, 0x7d6f, 0xcb53, 0x7b2e, 0x3165, 0xc86a, 0xc37e, 0x4813, 0x6588,
    0x5f62, 0x3f44, 0x48ff, 0xb7f8, 0xc180, 0x41f2, 0xa827, 0x1723, 0x18e2, 0x048e, 0x2c9d, 0xc49c, 0xf860, 0x2a69, 0xd395, 0x0ac2,
    0xbe87, 0xe72a, 0x4076, 0x22a2, 0x7b57, 0xbd0e, 0x95e1, 0x9b7d, 0xda0d, 0xcac4, 0x34a1, 0x6425, 0x2a2f, 0x766d, 0x1d6e, 0x1dac,
    0x2f75, 0x5e77, 0x7373, 0xc0c0, 0xcaf7, 0x04c6, 0xb453, 0x16ca, 0x51bb, 0xe477, 0x25ce, 0x883d, 0x80f9, 0xe56a, 0xc67f, 0x54c4,
    0x2b39, 0xa48f, 0x7fa2, 0xd564, 0x69d8, 0x7249, 0x0537, 0x0c61, 0x2929, 0x7d7d, 0x2937, 0xd902, 0x9847, 0x8fb1, 0xd8cc, 0x5545,
    0xad61, 0x8e0d, 0xf807, 0x8890, 0x800b, 0x96c7, 0x0009, 0xb11e, 0x7ed3, 0x65a6, 0x59c8, 0xab25, 0x35bc, 0x7bdc, 0x211a, 0xc5b8,
    0x3af3, 0x7f73, 0x18a2, 0x903d, 0x9e1d, 0x1482, 0x4416, 0xe1c8, 0x5cfb, 0x87f4, 0x744d, 0x1cbe, 0x598c, 0x9bf9, 0x167a, 0xf4b1,
    0x0187, 0xc45f, 0x56d5, 0x7c54, 0x21dc, 0xca65, 0x6abc, 0x219b, 0x92f0, 0x18d7, 0xa718, 0x461a, 0x5155, 0x3336, 0x2c14, 0x6b85,
    0xb833, 0x7b05, 0xfec1, 0xd1a3, 0xd1ec, 0xb81b, 0xbdf2, 0x3181, 0xd556, 0x547c, 0x614b, 0x71f8, 0x74f0, 0xdd54, 0xbe1e, 0x665e,
    0x917a, 0x7ca3, 0xcb4e, 0xeba7, 0x67a1, 0x4b1f, 0xff1f, 0x6c68, 0xf6df, 0x06a2, 0xe059, 0x86d5, 0x8617, 0xa641, 0x212a, 0xd06d,
    0xf09a, 0x6235, 0x4174, 0xff9b, 0x9118, 0xab71, 0x6234, 0x0272, 0x050c, 0x17b9, 0x8b78, 0xff82, 0xd717, 0x62f9, 0x00b8, 0x6c79,
    0xcce7, 0x5cd0, 0x3f3f, 0xb2b2, 0x3a02, 0x764b, 0xd390, 0x6062, 0x6ee3, 0xeb4c, 0x1da7, 0xc9da, 0x2f45, 0x1dcb, 0xbe82, 0xb693,
    0x0758, 0x04db, 0x8fac, 0xa072, 0x101a, 0xea01, 0x7f9d, 0xae75, 0x2b2b, 0xf3f3, 0xc0bb, 0x201e, 0x0e66, 0x490c, 0x80f4, 0x597d,
    0x714d, 0xc835, 0x3c16, 0x31de, 0x28a4, 0x6cfd, 0x100b, 0x45be, 0x2da9, 0xdce9, 0x90f6, 0x201c, 0xdb50, 0x06e2, 0x7236, 0xe719,
    0x3019, 0x401b, 0x8238, 0x38a6, 0xf399, 0x823d, 0x2012, 0xddfb, 0x7c65, 0x4d8f, 0x2017, 0x9e3c, 0xd45c, 0xb5ea, 0x289f, 0x1f2e,
    0x541d, 0xe2ae, 0x157d, 0x2681, 0x1a55, 0x3121, 0x1010, 0x3636, 0x9928, 0x3c1b, 0x7ac3, 0xeb06, 0xcdf9, 0xeab1, 0x3d88, 0xce25,
    0x44a3, 0xce89, 0xe397, 0xd182, 0x8fa4, 0x392b, 0xc455, 0x90fb, 0x723b, 0xd2f3, 0x40cc, 0x10bf, 0x7f7f, 0x3131, 0x0f27, 0xd86c,
    0x3d8d, 0xbbee, 0x17b4, 0xbcc1, 0x02a0, 0xbc46, 0x622f, 0x160c, 0x78a0, 0xead0, 0x6c63, 0x8bb6, 0x7278, 0xacfa, 0xf6da, 0x7ac8,
    0xedb3, 0x1582, 0x7646, 0xb8fb, 0x8e3a, 0x9831, 0x1da2, 0x8a54, 0xec24, 0x3076, 0x2019, 0xb2ec, 0x456e, 0xc371, 0x1015, 0x3cf4,
    0x1985, 0xd686, 0xc45a, 0x6b7a, 0x153e, 0xed9e, 0x2c0f, 0xe8d3, 0xa5e8, 0x63b9, 0x6659, 0x2d75, 0x8350, 0xe39c, 0xb82e, 0x233f,
    0xe31a, 0x125e, 0x9bf4, 0x40d1, 0x47dd, 0xdaeb, 0x189d, 0xf1d2, 0x0529, 0x7fcd, 0x888b, 0x5caa, 0x0f2c, 0xd3e8, 0x35b7, 0x581a,
    0x7dc9, 0xc297, 0x058f, 0x778c, 0xef99, 0xc913, 0xf88e, 0xc0b9, 0x3a1a, 0x2850, 0xcd87, 0x7858, 0x6bc8, 0x2c62, 0x3172, 0x7a82,
    0x5233, 0xf840, 0x6789, 0xad5a, 0xd766, 0xf2a2, 0xb2ea, 0xf8bf, 0x63d3, 0x195f, 0xe098, 0xd70b, 0xfdb3, 0x48a1, 0x878b, 0xe2a7,
    0x2d85, 0xe1c7, 0x4ca7, 0x4c10, 0x7008, 0x5535, 0x5232, 0xa7ad, 0x1934, 0x2b28, 0x9e6a, 0x86b3, 0xf26f, 0x0ea1, 0x0aef, 0x6503,
    0xb386, 0x6a9e, 0x8116, 0xb43e, 0xca83, 0x4d7c, 0xc42b, 0xfc55, 0x9b6f, 0x6dfc, 0x7f11, 0x1c06, 0x6362, 0x0aa2, 0x28cc, 0x36b4,
    0x07b7, 0x2db1, 0x8be5, 0x5c5f, 0xad22, 0x58c9, 0x20c3, 0x9500, 0x9e85, 0x2c7d, 0xf509, 0x5c7a, 0xb87e, 0x99f0, 0x4083, 0x0e9a,
    0x1d24, 0x7343, 0xb1e5, 0x02e0, 0xef80, 0xe860, 0x6236, 0xcc73, 0xfc7f, 0xb1a1, 0x5e2c, 0x1a5b, 0xf58e, 0xa729, 0x7b76, 0x2a08,
    0x3972, 0x8d32, 0xc715, 0x27dc, 0xf4ee, 0x046e, 0xf957, 0x5875, 0x52f7, 0x75e7, 0x9cde, 0xde9c, 0x4d0f, 0x2edc, 0x2e42, 0x8c41,
    0x3c31, 0x313c, 0x7293, 0x2d90, 0x1695, 0x5497, 0xf0b5, 0xae90, 0x7b49, 0x50a5, 0x69f3, 0x22bd, 0x5c77, 0x5768, 0x332b, 0xeb8a,
    0xc61f, 0x6f63, 0xcefb, 0x9ba6, 0xa560, 0xd2e2, 0xef1d, 0x1b6d, 0xd9ca, 0x8534, 0x947f, 0x0fa2, 0x5c66, 0xb7d8, 0x2fd1, 0xc247,
    0x2322, 0x99d5, 0x579f, 0x34c3, 0x4346, 0xc5de, 0x2f1c, 0x4720, 0x3b1d, 0x6f20, 0x213b, 0x84ef, 0x9e30, 0x395c, 0x8cab, 0xc78f,
    0x6d28, 0x5f42, 0x504b, 0x7909, 0xdba5, 0x5127, 0x6b27, 0x9c76, 0xf4d0, 0xc2ed, 0xfb18, 0x8479, 0x6806, 0x89c5, 0xbb4c, 0x4cbb,
    0x6ca1, 0x453b, 0x5f0b, 0x0ae9, 0x2c92, 0x922c, 0xb863, 0xba51, 0xe71c, 0x841a, 0x8178, 0xfe86, 0x601d, 0x6c13, 0x5581, 0x68a3,
    0xc0f1, 0xea5d, 0x7615, 0xe7ab, 0x48dd, 0x01bf, 0x5fbf, 0x51dc, 0x963f, 0x5e24, 0x443e, 0xf104, 0xe283, 0x3e05, 0xa5c7, 0x9f50,
    0x81a4, 0x21d6, 0xe136, 0x918a, 0x3734, 0x41d2, 0x1128, 0x133a, 0x288a, 0x627b, 0xcc71, 0x6de8, 0xc06b, 0x54ab, 0xcd40, 0x0e7f,
    0xf69f, 0x80e3, 0xda4e, 0xfa0a, 0x976f, 0x24d1, 0x5f76, 0x8f77, 0xfe75, 0xb9d6, 0xe6dd, 0xd779, 0xfddc, 0xd740, 0x44eb, 0xd376,
    0xfcfe, 0xfb86, 0x772c, 0xbd14, 0x76d3, 0xeb44, 0xf106, 0x6c6a, 0x4068, 0xa807, 0x102f, 0xdfd0, 0xe769, 0xa33b, 0xd057, 0xd276,
    0xe3f1, 0x2ae3, 0x73d6, 0x5949, 0x64c8, 0xe70a, 0xa44c, 0x90ac, 0x4ce0, 0x1bca, 0x1b29, 0x70f3, 0x5d35, 0x96ea, 0xf4be, 0xdd3c,
    0x4a7d, 0xa7ae, 0x079c, 0x3b0b, 0x101c, 0x406a, 0x1f6e, 0xf48d, 0xd9b8, 0xe2cc, 0x5829, 0xb8b4, 0x323a, 0xf7de, 0xb0b9, 0x8558,
    0xa8ee, 0x9732, 0xfe63, 0x4941, 0x5518, 0x6c07, 0x15c7, 0xdc27, 0x390a, 0x4056, 0xb0a1, 0x8205, 0x51a5, 0x1312, 0xd470, 0x70d4,
    0x7bdb, 0x2fe0, 0x179b, 0x86bf, 0x962d, 0x2d96, 0x70f2, 0xcd86, 0x6417, 0x2cd4, 0x10e8, 0xdff9, 0x497b, 0xa550, 0x44bd, 0x2878,
    0x3a08, 0x3571, 0x5ee4, 0x1430, 0x9070, 0x07df, 0xc8c5, 0x09ea, 0x45ea, 0xf28d, 0xe31d, 0x63c1, 0x13ca, 0x37d3, 0x7faa, 0x66f6,
    0xf4d8, 0x57c6, 0xfe0b, 0x2de2, 0x3411, 0x2600, 0x1922, 0xf09b, 0x2d3b, 0xae9f, 0xf755, 0x4e49, 0x8bca, 0x9b5d, 0xc8fb, 0x914f,
    0x432c, 0x9a40, 0xdeac, 0x1048, 0x899d, 0x35e9, 0x6f9b, 0xfc6d, 0xfee7, 0x10f1, 0xfede, 0xe5a8, 0x9e73, 0x69fc, 0x9488, 0xcc7a,
    0x25d7, 0x7b37, 0x0018, 0x87e4, 0x7acc, 0x8894, 0x59d1, 0x8b81, 0xd9ff, 0x0e11, 0x52e5, 0x5c44, 0xa74c, 0x104c, 0xfc59, 0xdfd4,
    0x31db, 0xa1a0, 0x1f43, 0x4275, 0x013f, 0xfa65, 0x85da, 0xce38, 0x0dc9, 0xfa74, 0xcdd3, 0xef4b, 0xb576, 0x7e3d, 0xad07, 0x6637,
    0xa406, 0xc101, 0x3ea0, 0x9a80, 0xe6e8, 0xfd92, 0xae80, 0xced2, 0x3bb5, 0x1d4e, 0xe59f, 0x677e, 0xa691, 0x73dc, 0x129b, 0xe629,
    0xdb4a, 0x7d06, 0x69e7, 0x3ba3, 0xb3a8, 0x1456, 0x249a, 0xf2ed, 0x0db7, 0x58ae, 0x5ee1, 0xd6ed, 0xe49f, 0xf8ef, 0xbabd, 0xa748,
    0xedd6, 0xe15e, 0x2cee, 0x25f8, 0xb9d8, 0x764d, 0x1a28, 0x7e93, 0x765f, 0x778f, 0x0342, 0x403d, 0x5b69, 0xcfa0, 0x0da5, 0x4be8,
    0x20a8, 0xd9ed, 0xef17, 0xcf11, 0x2364, 0x860c, 0xc38e, 0x670c, 0x0151, 0xcf43, 0xfed5, 0x8517, 0x5060, 0x87ba, 0x1a62, 0xb07c,
    0x4261, 0xf2bf, 0x2a00, 0xc46b, 0x1210, 0x6c9e, 0x08db, 0x2d29, 0x6649, 0x9c25, 0x8ab4, 0x2563, 0x45d8, 0x5d67, 0xb495, 0x2bd0,
    0xe9b4, 0xa75b, 0x276b, 0x769c, 0xa2b0, 0x9d45, 0x38f8, 0x94e5, 0x3eb2, 0x81ca, 0xb6dd, 0xddb6, 0xa390, 0x6405, 0x2f3d, 0x23b7,
    0x4cce, 0xce4c, 0xad33, 0xbb8d, 0x6812, 0x57d1, 0xb179, 0xf86b, 0x1d60, 0x136c, 0xbce5, 0xd9a6, 0xe8c4, 0x978e, 0x071c, 0xb4ff,
    0x920d, 0x0892, 0xaf19, 0x7c53, 0x7007, 0x6c06, 0xf006, 0xf228, 0x2d97, 0xd5a9, 0x6f92, 0x0fec, 0xa11c, 0xfd7a, 0xf44a, 0x90bc,
    0x7821, 0x2c32, 0x7009, 0xfb3e, 0x5e11, 0x7229, 0xa876, 0xf52b, 0x86c5, 0xd87b, 0x5388, 0x8cd5, 0x6e28, 0x4efe, 0x9916, 0x20e7,
    0x0be5, 0x82df, 0xb971, 0xb13b, 0x788e, 0x78bf, 0xf007, 0xcd7b, 0xc43d, 0xede7, 0x7e75, 0x2807, 0xafd0, 0x478f, 0xe805, 0xec12,
    0x7e0b, 0x942f, 0xa5d6, 0x1a40, 0x9f6d, 0x10ac, 0x162d, 0xec06, 0x0ab4, 0x0517, 0x9d5f, 0x01ca, 0x929a, 0xe636, 0xdb68, 0x78ef,
    0x2f1a, 0x7927, 0x25ba, 0x9abc, 0xe63e, 0xf36c, 0x92de, 0x3e61, 0x6bda, 0xb164, 0x8491, 0x4a85, 0x467f, 0xd544, 0x7860, 0xf66c,
    0x7ec1, 0xfc53, 0xbaf2, 0x0e0d, 0xff9c, 0xe061, 0x1118, 0xcb1e, 0xc0cb, 0x6b06, 0xfc64, 0x5ce9, 0xb5b6, 0xa33e, 0xc56d, 0x2cfa,
    0x55a4, 0x2b19, 0x120e, 0xe0fb, 0x8672, 0xa52a, 0xfa4b, 0x9266, 0xe0aa, 0x485b, 0x6ed1, 0x71b4, 0xa32e, 0x940b, 0x6eb2, 0x13a5,
    0xd7cb, 0xff2e, 0xc249, 0x8892, 0x9b23, 0xa16e, 0xf649, 0x04fa, 0xf852, 0x2fb9, 0x655c, 0x3c7e, 0xf6cd, 0xb186, 0x49c6, 0x1806,
    0x2c96, 0x7b4d, 0x51a9, 0xe9b8, 0x803b, 0x6033, 0x6e2c, 0xc8c2, 0x7b5b, 0x2917, 0x861b, 0x7151, 0x744b, 0x7935, 0x08a0, 0xa605,
    0x6f71, 0x0468, 0xf705, 0xea6b, 0x18d0, 0x2dbf, 0xc2a5, 0xaa98, 0x2da2, 0x357f, 0x2af1, 0xa996, 0xa1ae, 0x10bd, 0xf74d, 0xd9fb,
    0x3df9, 0x7a43, 0x2fbc, 0x8ed4, 0x3709, 0x7d5d, 0x3414, 0x3b66, 0x2e54, 0xeb91, 0x8994, 0x1592, 0xd1c6, 0x45bb, 0x211d, 0x29ed,
    0x8beb, 0x7cb1, 0x8e1b, 0x722b, 0xc843, 0x4f33, 0x2f5f, 0xbbfc, 0x0480, 0x8f58, 0xfd60, 0x3f52, 0x1ba9, 0x37e0, 0x575b, 0x7d7b,
    0x77f2, 0x7143, 0xb4c6, 0xb2aa, 0x5120, 0xab77, 0xf573, 0x210d, 0xef92, 0xa3df, 0x4cf9, 0x5df8, 0xc728, 0x704a, 0x5ba2, 0xabc9,
    0xc8be, 0x9827, 0x18a4, 0x8cad, 0x0cbc, 0xb066, 0x2309, 0x0a95, 0x2a1a, 0x8fec, 0x32fe, 0xd31d, 0x94de, 0xdebf, 0x644b, 0x9b38,
    0xda9d, 0xa70e, 0x498a, 0x4fb5, 0xc597, 0xc7a4, 0x797a, 0x6a7a, 0x8bf7, 0x88e7, 0xad97, 0x2901, 0xac2b, 0x8199, 0x1221, 0x794f,
    0xe961, 0x5973, 0x8ef7, 0xb68d, 0x82d8, 0x1e5a, 0x0678, 0x9c4c, 0x2c8f, 0x1a9a, 0x35e0, 0x55aa, 0xe4af, 0x5525, 0x8dcc, 0x1d1c,
    0x7bcb, 0x519b, 0x4153, 0xbb93, 0x0e63, 0x752c, 0x4c55, 0x52e1, 0x2334, 0x962e, 0xb35d, 0x02c5, 0x8957, 0xb54c, 0x2538, 0x9463,
    0xa378, 0x0e07, 0x547b, 0x5536, 0x2877, 0x28cb, 0x1c12, 0x9299, 0x8501, 0x2d69, 0x103f, 0xed4f, 0x5b83, 0xf601, 0x56c1, 0x77b0,
    0x08d5, 0x85d0, 0x949e, 0xb479, 0xcf6e, 0x0541, 0x791f, 0xf229, 0xef2f, 0x0133, 0x82ee, 0x4fcf, 0xb1ca, 0x881d, 0xcf9d, 0xd4dc,
    0x89c7, 0xc461, 0xaa71, 0x96b2, 0x3618, 0x7ab0, 0xde11, 0x4d51, 0xb7ea, 0xcf87, 0xb997, 0xe5f4, 0x7ae1, 0x1c13, 0x9716, 0x2b05,
    0xbee9, 0x7b3f, 0x2a29, 0x0988, 0x9ce6, 0x7328, 0x5aba, 0x808f, 0x602f, 0xf086, 0xdea3, 0x8097, 0x1199, 0x705e, 0xb5be, 0xa91e,
    0xf009, 0x0e97, 0x11da, 0xc9b7, 0x8208, 0x4175, 0x4530, 0xb955, 0xba63, 0xc65f, 0x33f0, 0x3506, 0x04de, 0x1516, 0x83e0, 0x4622,
    0x324b, 0xe12c, 0x1d09, 0xac32, 0x6c52, 0x52b9, 0xee34, 0x9daa, 0xfb2a, 0xbc8d, 0x99c6, 0x2657, 0xa7cb, 0x7a71, 0x46d3, 0xea27,
    0xb45d, 0x1b63, 0xf821, 0xa543, 0x49b1, 0xe54a, 0xcafd, 0x829e, 0x5f54, 0x56b6, 0xf184, 0xcae1, 0xf1fd, 0xb1f2, 0x89fa, 0xb4d1,
    0x447a, 0x802d, 0x1606, 0xe663, 0x8037, 0x9147, 0x1d7f, 0xd168, 0x9651, 0xee50, 0xc554, 0x2e15, 0x712b, 0xa0e7, 0x2ea5, 0x95eb,
    0xb835, 0x601f, 0x82fd, 0xa7f8, 0x61f6, 0x2476, 0xc3d4, 0xcc58, 0xe7bd, 0x56f6, 0x1c62, 0xe35b, 0x1917, 0x16aa, 0x5149, 0x4c40,
    0x3089, 0xcf93, 0x64ee, 0xc7bc, 0x3aa1, 0xa18f, 0x77d4, 0xda10, 0xcd52, 0xe10f, 0x4a1d, 0xcf01, 0x12ce, 0x24b3, 0x1424, 0xcefe,
    0x621b, 0xcad7, 0x9351, 0x1a8f, 0xd213, 0x8441, 0xae1c, 0x184f, 0x41e4, 0x32c3, 0x9a37, 0xb9a7, 0x565c, 0xb9e3, 0xee28, 0xdfaf,
    0x0739, 0xc8b4, 0xdaa4, 0xf420, 0xc1a1, 0x5e57, 0x9c38, 0xa585, 0x9781, 0x0cd6, 0x9ec7, 0x5c40, 0xeca9, 0x5ad7, 0xeebf, 0x3acb,
    0x6b03, 0x6029, 0x03ec, 0x06b7, 0x3590, 0xbb19, 0xcaa8, 0x628e, 0xd388, 0xe845, 0xa831, 0x9f81, 0x7a8d, 0xd416, 0x8243, 0x5332,
    0x3dff, 0x6552, 0xefcc, 0xb3fc, 0xe858, 0xa2d5, 0xadf0, 0x8f90, 0x773e, 0x7353, 0x4323, 0x587c, 0x217f, 0x94bc, 0x4746, 0xfbde,
    0xa947, 0xec08, 0xc1ea, 0x60d8, 0x3436, 0x8fff, 0x7b11, 0x60b0, 0xa819, 0xcfe1, 0x06c6, 0x0218, 0xfccd, 0xc62c, 0xef65, 0xdd8a,
    0x9fe4, 0xeff8, 0xb88a, 0x721f, 0xc221, 0x3ffb, 0xdfff, 0x8ffd, 0xe380, 0x9ff6, 0xa443, 0x4fe2, 0x7f12, 0x221d, 0x5bff, 0x6888,
    0x7de0, 0xd21a, 0xd0df, 0x2f10, 0xcd73, 0x1886, 0x8206, 0x0bfd, 0x9aac, 0x4ff4, 0x281a, 0x937e, 0xfd8f, 0xffdf, 0x6c4c, 0x5441,
    0x8665, 0xc883, 0x962f, 0x7d71, 0xcb37, 0xbbfa, 0x5f8b, 0x3204, 0x5566, 0x8218, 0x55cf, 0x2dde, 0x786f, 0xdf0d, 0xc5a2, 0x80dd,
    0x2404, 0xafdd, 0x6134, 0xad8d, 0xa874, 0x043f, 0x9115, 0x1c4a, 0x86c6, 0xfff1, 0x5fc9, 0x4aaa, 0x3e21, 0x437c, 0x80b5, 0xd817,
    0x79b1, 0x6bf8, 0xdfb1, 0x7b35, 0xbc0b, 0xe201, 0x890f, 0x0f89, 0x86fe, 0x7881, 0xa642, 0x3663, 0x4e6e, 0x2d6f, 0x3ef7, 0x462d,
    0x0a3c, 0x8f0b, 0x425f, 0x286d, 0x48b8, 0x30db, 0x76be, 0x75a0, 0x1be4, 0x3216, 0x90a3, 0x0564, 0xdbdd, 0xdddb, 0x7cce, 0x05cd,
    0xb105, 0xb43c, 0xa365, 0x5872, 0xd1c2, 0xcc47, 0x6002, 0x4113, 0xb301, 0x5fdb, 0x348a, 0xd401, 0xab61, 0x5d8b, 0x1c2b, 0x1132,
    0x579d, 0xf379, 0x0ce2, 0xee1e, 0x6428, 0x8815, 0x4e0a, 0x30b3, 0x12d1, 0xafef, 0xaf95, 0x36c4, 0x6f66, 0xfaa7, 0xe524, 0x0fc7,
    0x7d48, 0x91ff, 0x096c, 0x6c09, 0x9b17, 0xbf86, 0x0626, 0x390d, 0x4356, 0x1bf6, 0x3dc5, 0x29af, 0x8aeb, 0x2b33, 0x00a5, 0x8faf,
    0x5f80, 0xdd6c, 0x2948, 0xfe6b, 0x7337, 0xf62a, 0x6e04, 0xeef4, 0x7f28, 0x287f, 0x8a96, 0x36fc, 0x90c4, 0xe660, 0x0a39, 0x5640,
    0xd61a, 0xe0d8, 0x2043, 0xf8b5, 0x6ab5, 0x259e, 0x8d58, 0x26bc, 0x45b7, 0x3f09, 0x64bf, 0xba39, 0x62d7, 0xd86a, 0xf50f, 0xf25c,
    0x41eb, 0x8dd9, 0x3ca6, 0x8bdb, 0x815d, 0xb5ca, 0x8293, 0x2ccc, 0x37c4, 0xe213, 0x44d7, 0xcbe1, 0x1678, 0xb561, 0x68e8, 0x40a1,
    0x37f1, 0x7c45, 0xd90f, 0x81c0, 0xe7fe, 0xf110, 0xd7fe, 0x1000, 0xa5fe, 0x643a, 0x1e25, 0x6103, 0x3555, 0x0870, 0x3788, 0x5363,
    0x5ad0, 0x0d89, 0x5a91, 0x5b5f, 0x7167, 0xc12f, 0xb436, 0xcc28, 0xc081, 0x0fd9, 0xdd9a, 0x62ff, 0xa7c4, 0x83ff, 0x1800, 0xe487,
    0xf286, 0x3813, 0xff2b, 0x1426, 0x41ad, 0xe0b0, 0xa96a, 0xfe07, 0x2c31, 0xa377, 0xad59, 0x079b, 0x3eab, 0x9e1c, 0x72d8, 0xbcdf,
    0x1ff8, 0xaaa5, 0xc58a, 0x1f64, 0xfb11, 0xbfc4, 0x6887, 0x9522, 0x7851, 0x5fed, 0xe701, 0xc2ce, 0x566b, 0xe6c1, 0xbd74, 0x5f93,
    0x16ac, 0x6f84, 0x154b, 0x4b15, 0x0b5f, 0xe90a, 0xea44, 0xb623, 0x0f0a, 0x41fd, 0xf73e, 0x2d46, 0xffb4, 0x1c07, 0x9523, 0xb969,
    0xb848, 0xdb30, 0x8d83, 0x3ae9, 0x15b4, 0x3fad, 0x459d, 0xb0a2, 0xf3cb, 0xcbf3, 0x5940, 0xf353, 0xfe4c, 0xd9ac, 0xd0f4, 0xedc2,
    0x1c3a, 0xa628, 0x840f, 0x2335, 0x4224, 0x9ef2, 0x5eca, 0x1e02, 0xc323, 0x8d6a, 0xb3e4, 0x0f7e, 0xff57, 0xae69, 0x3854, 0xd945,
    0x29e9, 0x965e, 0xa419, 0x40c2, 0x5f51, 0x063e, 0x9327, 0xba36, 0x8587, 0xd87c, 0x9ca2, 0x2f26, 0xeba1, 0xe6f9, 0x039e, 0x3a94,
    0x0902, 0xd59b, 0x06ef, 0x1ab3, 0x75fe, 0xd6b9, 0x39bf, 0x3d56, 0xef03, 0x90d6, 0x73cd, 0x8618, 0x5614, 0xa8b3, 0xa17f, 0xd040,
    0xff5b, 0x8868, 0x8161, 0x12d5, 0x302c, 0xa25a, 0xe84b, 0xa50d, 0xb31a, 0xef06, 0x464a, 0xf5b4, 0xfc8e, 0x6a37, 0x2c77, 0x14bd,
    0x1f70, 0x65c8, 0x5188, 0x315b, 0x798f, 0xdcc9, 0xb242, 0x3291, 0x80ff, 0x3dd7, 0xfa15, 0xf1e8, 0xc746, 0x3bd9, 0xef27, 0xeca3,
    0x91b7, 0x655f, 0x69a0, 0xc675, 0xd460, 0xf09e, 0x8b1c, 0x18e6, 0xc72c, 0x9211, 0x820c, 0xe7c1, 0xe8c8, 0x7bdf, 0xf4f2, 0xf4d4,
    0x6ff2, 0xa10e, 0xbdff, 0x97fc, 0x6c45, 0xbffd, 0x0111, 0x87fc, 0x409a, 0x2c43, 0x06ba, 0xe7ee, 0x5ef0, 0x31be, 0xd05a, 0x890d,
    0x72c5, 0xb86d, 0x445c, 0xe552, 0x251e, 0x0361, 0x6eba, 0xe785, 0xdcd8, 0x1438, 0x2bc4, 0x55fc, 0xfc87, 0x1101, 0xfe05, 0xce22,
    0x6fcd, 0x712d, 0x3816, 0x2165, 0x1fae, 0x7c26, 0xec5d, 0x6434, 0x2481, 0xbd86, 0x4497, 0x0ace, 0x4973, 0x0b5d, 0x5aff, 0x0a8f,
    0x2b56, 0x33fd, 0x46ab, 0x57c2, 0x58e0, 0x9485, 0xa5af, 0xc7fd, 0xa3c2, 0xbfd6, 0x2ada, 0x707f, 0x7c24, 0x12fd, 0x1cf3, 0x8d98,
    0xb5f0, 0x90ae, 0x6c86, 0xf1aa, 0x6b31, 0xae05, 0x6859, 0x5968, 0xf9df, 0xe810, 0x9e2d, 0xa284, 0x02f7, 0xc423, 0xc53d, 0xaf29,
    0x50fa, 0x4e1a, 0x3297, 0xeea8, 0x805f, 0x6cdd, 0x5bd3, 0x22d6, 0xc1d3, 0x5375, 0x0f4d, 0xdc2e, 0x98b7, 0xb798, 0x3a7e, 0x5d57,
    0x8864, 0x6fc2, 0xf16d, 0xab0f, 0x2df1, 0x4520, 0x15b3, 0x1885, 0xc8f0, 0x5aa3, 0xe3e8, 0xcff5, 0x2b9b, 0xcf61, 0x6920, 0x7588,
    0xfc96, 0x96bf, 0x3090, 0x0669, 0x413c, 0x0f91, 0xd637, 0x6d72, 0xb35c, 0x0feb, 0x4cdf, 0x284f, 0x2119, 0x72cc, 0x2e5a, 0x96ff,
    0x158e, 0x9908, 0x89e6, 0xbb5c, 0x5088, 0x6621, 0xe56c, 0x9a42, 0x3a54, 0x1f82, 0xca5a, 0xc6a9, 0xfa21, 0xfb12, 0x9b70, 0xc548,
    0xbfbc, 0xcc04, 0xdbc8, 0xafb2, 0x4057, 0x6967, 0x67eb, 0x4521, 0x2832, 0xf1fa, 0xf259, 0xbf07, 0x3028, 0xdd43, 0xa2a3, 0xa73c,
    0x02c6, 0xefaa, 0x4787, 0xc5b1, 0x99b0, 0x60a0, 0x3cf2, 0xf59a, 0x3cb3, 0x8b2e, 0x5d2c, 0x6846, 0x1529, 0xeae6, 0x93d8, 0x3d81,
    0xfe8c, 0x89aa, 0x2695, 0xae4a, 0x9658, 0x9dc0, 0xb721, 0x80f2, 0xf961, 0x7bf1, 0x5389, 0xa3c9, 0xd4d6, 0xa351, 0x9bc2, 0x093e,
    0x47f1, 0x4ef0, 0x2788, 0xf221, 0xba20, 0xcdff, 0x5444, 0x0ec8, 0xd06e, 0x5626, 0xca20, 0xcc37, 0x69bf, 0xd332, 0xceb8, 0x340d,
    0xee6f, 0x5e67, 0xa2e6, 0xaf55, 0x22b2, 0x8943, 0x1a13, 0xe851, 0xbb31, 0x3d68, 0xbdaf, 0x7321, 0x0244, 0xbf7b, 0xc316, 0x63e2,
    0x0047, 0xb63b, 0xaa5e, 0x0f4f, 0x9ada, 0x6a34, 0x089d, 0x4325, 0x630c, 0x465c, 0x7dcc, 0xd9e6, 0x59f3, 0xf0bf, 0x8820, 0x5417,
    0x36a3, 0x96f7, 0x1777, 0x9b9f, 0xeb5b, 0xea91, 0xfcb4, 0xb39b, 0x0a2d, 0x887a, 0x96e1, 0x3585, 0x19aa, 0xdf23, 0xfa8d, 0x4ca0,
    0x8f7b, 0x86b7, 0xdfd8, 0x25fc, 0x6292, 0xed53, 0xf670, 0xe9bc, 0x7052, 0x8599, 0xf4b5, 0xb8ff, 0x2474, 0xcab0, 0x0e53, 0xb6ec,
    0x83ec, 0x58b1, 0x20cd, 0x0612, 0xc5fa, 0x803e, 0xd95a, 0x517d, 0xfedb, 0x40d4, 0x58e7, 0x9f01, 0x54fa, 0x3616, 0xa686, 0x23cb,
    0x84aa, 0x5258, 0x46e3, 0xe029, 0x8b8c, 0x550b, 0x25d9, 0x9849, 0xb112, 0x3866, 0x23cf, 0xaf59, 0x1c4e, 0xc2d2, 0x0a93, 0x315f,
    0x6d4d, 0x1a35, 0xeb03, 0xac8c, 0x6627, 0xc4ba, 0xd4a8, 0xdc74, 0xe14d, 0x9f04, 0xe232, 0x6318, 0x5950, 0xa5b2, 0x0d15, 0xf647,
    0x48f4, 0x8cc7, 0xa286, 0x298d, 0xfafd, 0xe28e, 0x021a, 0x6240, 0xa7ac, 0x15c6, 0x78be, 0xcf6d, 0x8990, 0xe158, 0x7192, 0x0186,
    0xa256, 0xebd6, 0xa094, 0x7744, 0x4aa9, 0x9ca1, 0x7bf0, 0x9f25, 0xa97d, 0xedd4, 0xdd33, 0x30fd, 0x59c0, 0xa1e6, 0x18fa, 0xaa13,
    0x6df4, 0xa09c, 0x388d, 0x845e, 0x1fc8, 0xc8e3, 0x3983, 0x3b1a, 0xa003, 0x155d, 0x02de, 0x41b5, 0x9f96, 0x7673, 0x9707, 0x199e,
    0xc923, 0x2bdd, 0x95a1, 0x98c6, 0x55c9, 0xa4d2, 0xb590, 0xa4f0, 0xaa4d, 0x420f, 0x3996, 0x772a, 0x9f67, 0x97bf, 0x5a73, 0x320a,
    0x5103, 0x6ffb, 0x91c0, 0x1c43, 0x5f89, 0x37fa, 0x240d, 0xb10e, 0x1ec8, 0x510c, 0xbae7, 0x1ff0, 0xbfc5, 0x47fa, 0x6d56, 0x6dfd,
    0x0def, 0xe1bb, 0xe6ac, 0x0eee, 0x64b5, 0x390b, 0x2df2, 0x8058, 0x6a1b, 0xdc40, 0x637f, 0xf097, 0x4737, 0x97ec, 0x7ecd, 0xb6b7,
    0x9e47, 0xb35e, 0xf899, 0xd51b, 0x30d1, 0x9783, 0x798d, 0x1eb8, 0x45aa, 0x686b, 0x1782, 0x22c3, 0x4b0a, 0x9550, 0xdb8a, 0xf459,
    0x26f9, 0xc0fe, 0x2785, 0xac85, 0x9fda, 0x7e20, 0xc1bf, 0xae03, 0x9f26, 0xc435, 0x1bc1, 0x8cd6, 0xccc6, 0x05fa, 0x19e6, 0xdbc1,
    0x46e1, 0x2c24, 0x619a, 0xcfab, 0x0ac4, 0x1432, 0x4754, 0x9c5b, 0xa509, 0x212b, 0x122f, 0x1fcb, 0x6ec0, 0xd162, 0x27d9, 0xe813,
    0x1ebf, 0xbb5a, 0x44f9, 0xf970, 0x2e50, 0xba8c, 0xf478, 0x0afd, 0x9496, 0x6d84, 0x4e7e, 0xd47e, 0xd731, 0xbacb, 0x2f4b, 0xf494,
    0x6b0c, 0x4483, 0xb466, 0x08de, 0x6f7a, 0x77fb, 0x7e14, 0x55ad, 0xf4e1, 0xe3fa, 0x4cd7, 0xdb53, 0x523c, 0x07c0, 0x6caa, 0xf6a8,
    0xbe90, 0xc2fa, 0xd2b5, 0x2c22, 0x3022, 0x3d96, 0xb83c, 0xccf0, 0x0265, 0x6fd4, 0xc68d, 0x53c0, 0x0589, 0x207d, 0xabf5, 0xdad7,
    0x5aa5, 0x5e03, 0xd1ce, 0x1b2f, 0xe847, 0x0966, 0xb29e, 0x1857, 0x2143, 0x40ac, 0x7d39, 0x65ee, 0x634a, 0xa1a8, 0x1db8, 0x1c84,
    0x3542, 0x7421, 0x4f49, 0xb2f4, 0x89dc, 0x5f27, 0x5f6a, 0x753b, 0xeb8d, 0x980e, 0x70ea, 0xa9dd, 0x11dd, 0x5282, 0xda64, 0x4e2b,
    0x1fe7, 0x1cdb, 0x8739, 0x305d, 0x97b5, 0xd2d3, 0x1aea, 0x0bd1, 0x6b3e, 0xfe17, 0x8a47, 0x00f8, 0x47cd, 0x9ea6, 0x2578, 0xe294,
    0xd165, 0x6796, 0x6d0d, 0x48b5, 0xb108, 0x0d55, 0x91a7, 0xea7b, 0xbe53, 0x0373, 0x9762, 0x71d1, 0xe2c6, 0x8c2c, 0xc9f4, 0xbf4a,
    0x8436, 0xf51d, 0x72e6, 0xddee, 0x1c39, 0xc882, 0xf898, 0xc5b0, 0xef35, 0x1fc0, 0x1b20, 0x3862, 0xec5a, 0x5b0d, 0x692e, 0xa16b,
    0x6cb8, 0x7f5f, 0x6a4a, 0xdb98, 0xf46e, 0x2586, 0x6b54, 0x191e, 0x497a, 0x0aa1, 0x9715, 0x78ee, 0x882e, 0x7ff3, 0x614a, 0x93e6,
    0xb468, 0xbf8e, 0x75d7, 0xf139, 0xfe0d, 0x1d70, 0x41a2, 0x8635, 0x0b6a, 0x46bd, 0xd133, 0xac94, 0xfe9d, 0xb666, 0x6b46, 0xe08d,
    0xbade, 0x22ca, 0xbf9a, 0xd116, 0x5026, 0x46fd, 0x7034, 0xde57, 0xdc0f, 0xbfe8, 0x5559, 0x635a, 0x5030, 0xd84c, 0xb8bb, 0xfcdc,
    0xd0c8, 0x161f, 0x81b1, 0x0086, 0xeb65, 0x4a40, 0x0d78, 0x956a, 0x28cd, 0x4906, 0x4b63, 0xc58b, 0x9ef4, 0x6b5a, 0x8140, 0x39e4,
    0x1736, 0xab10, 0x70d5, 0xaa1f, 0x87d1, 0x7546, 0x3473, 0x4b6e, 0x9954, 0xcf7f, 0x3b02, 0xea51, 0xa9c3, 0x76a7, 0xd65c, 0x7a58,
    0x0ee5, 0x1965, 0x5e46, 0xf054, 0x04bc, 0xf51e, 0xb54d, 0x17e9, 0xc3a5, 0x7c02, 0xdecf, 0x6fba, 0xff14, 0x5fb0, 0xde49, 0x8bc6,
    0x0cfc, 0x8d41, 0xf7a8, 0xe025, 0x3f19, 0x573a, 0x6124, 0x52a1, 0x735f, 0xa1f8, 0x8a7f, 0xd82f, 0x6e29, 0x6f05, 0x85e4, 0xa257,
    0x26b9, 0x109e, 0x8427, 0x49ae, 0x1cb4, 0xa598, 0x4142, 0xecef, 0x4d1b, 0x9fa8, 0x0793, 0xb2c3, 0xcb11, 0x75af, 0x06a3, 0xf784,
    0x4278, 0x9ae4, 0x2b95, 0xc526, 0x2120, 0xed7e, 0xd7b6, 0x43d6, 0x3079, 0x3b2c, 0xc1e4, 0xecb0, 0x3d21, 0x1844, 0xd354, 0x0d2a,
    0x8ed0, 0x4dbe, 0x81f5, 0x4656, 0xce7f, 0x30f0, 0x72f6, 0x671f, 0x129d, 0x39a8, 0x01d0, 0xae8a, 0x257a, 0x5e48, 0x5018, 0xd692,
    0xe6a3, 0x534f, 0x63c8, 0x84d4, 0x1534, 0xb93b, 0x51ef, 0x4bc0, 0x1a38, 0x2bef, 0x43b5, 0xa95f, 0xfc8a, 0x53c7, 0xbc51, 0x0387,
    0xe1b2, 0x7dfd, 0x059c, 0x6a1e, 0xe332, 0xbec5, 0x9e15, 0x0442, 0x3202, 0xfeed, 0x4e67, 0xf7ee, 0xb12f, 0xa21f, 0x743a, 0xd785,
    0xcbce, 0x8330, 0x951c, 0x19bd, 0x24a4, 0xe40a, 0x5214, 0x7eb6, 0xa021, 0x0624, 0x88e1, 0x806c, 0xf882, 0x7c35, 0x0a88, 0x7a1e,
    0xe8db, 0x3941, 0x7d32, 0xd2af, 0xb7a4, 0x984f, 0x8a30, 0xca10, 0xd39c, 0x0e65, 0xdcc7, 0x9e6d, 0x2fb8, 0x5f53, 0x22bc, 0x52e4,
    0x6a33, 0x6f79, 0x4112, 0xb241, 0x2e1d, 0x13e0, 0x4655, 0x7314, 0xb4f4, 0xed65, 0xa7a5, 0x6b2f, 0xb27c, 0x231f, 0xcfa8, 0x6dad,
    0x2ef6, 0x1a32, 0xdea9, 0x4ad8, 0xa26f, 0xf322, 0x041d, 0xb89a, 0x8c90, 0x6639, 0x7382, 0xb044, 0xe027, 0xbf4c, 0x14ac, 0x5a5c,
    0x0de6, 0xa0bd, 0xe21b, 0x09f1, 0xbb3d, 0x0415, 0xbd4b, 0x381e, 0xb6f4, 0xf659, 0x95ff, 0x130a, 0xccf7, 0x89e4, 0xbefa, 0x2dca,
    0x4d3d, 0x9a8f, 0x225e, 0x9b59, 0xa772, 0x6399, 0x54e7, 0xacb2, 0x267e, 0x46f5, 0x4a74, 0xe6a0, 0x14e4, 0x4b9d, 0xbf8c, 0xc774,
    0x1352, 0x8f21, 0x0d71, 0xc9a7, 0x50dc, 0xfc9d, 0x2a9a, 0xaa8b, 0xabaa, 0x3878, 0x0740, 0xba2a, 0x6768, 0xe582, 0xca09, 0x46df,
    0x61f4, 0x9d51, 0x7ad9, 0x1290, 0x77a6, 0x99ba, 0x9de9, 0xa66e, 0x49f2, 0x36b5, 0x1f65, 0x3f79, 0x1ca0, 0xd5f9, 0x92ce, 0x8fd6,
    0xf16e, 0x7aae, 0x8cc1, 0xd471, 0xde99, 0x66ea, 0x2df8, 0xbe50, 0x1e96, 0x3597, 0x0e79, 0x2050, 0xe92c, 0x68fd, 0xa3f5, 0xa4b3,
    0x367b, 0x303c, 0x2307, 0x75f8, 0x8437, 0x017b, 0x331c, 0x8958, 0x14b9, 0x08af, 0x5b6b, 0x33ea, 0x9424, 0xb60f, 0x634c, 0xd0ca,
    0x2de9, 0xe613, 0x4b87, 0x04f8, 0x3df5, 0xd3c8, 0x1178, 0x5684, 0x2d05, 0xf0d1, 0x6281, 0xaed9, 0x335b, 0x4eff, 0xebd7, 0x08e5,
    0xb3bf, 0x0509, 0xf7eb, 0x3b8a, 0x4a7b, 0x4847, 0xdf5e, 0xd5d6, 0xe45d, 0x0256, 0x4d53, 0x34a8, 0x9d80, 0x9027, 0xb625, 0xf6e0,
    0x9662, 0x72d0, 0x3f0d, 0xcc4b, 0x990c, 0xe15c, 0x9812, 0xba90, 0x4ea8, 0xe863, 0xf484, 0x6110, 0x4dc2, 0x5f57, 0xf210, 0xd3cc,
    0x804f, 0x74b8, 0x7315, 0x1625, 0xa704, 0x8c72, 0xb1e3, 0x84a6, 0xca1d, 0xca32, 0xc398, 0x1d4b, 0x5784, 0x5c8a, 0xdc01, 0x9b01,
    0x1dec, 0x55b0, 0xe518, 0x094e, 0xc839, 0xa645, 0x242f, 0xbd12, 0x982b, 0x4f02, 0xf08a, 0x914b, 0xa75f, 0x1316, 0x50a9, 0x9230,
    0xc60a, 0x928c, 0x24a7, 0xaafb, 0x7e89, 0x123e, 0xbaa1, 0xb217, 0x6253, 0x3cc5, 0x7195, 0xf8f1, 0x428c, 0xd98a, 0xab12, 0x5284,
    0x64ac, 0x9156, 0x0dbd, 0x398e, 0x2761, 0xb183, 0x5afc, 0x2190, 0x53f1, 0xc5c3, 0x227c, 0x57aa, 0x4b42, 0x7f6b, 0xf6af, 0x28bc,
    0xabf4, 0x4c9f, 0xe8c7, 0xfaa6, 0xf7d4, 0x4f23, 0x982a, 0x2bee, 0xa9d0, 0x9bd4, 0x1013, 0x5254, 0xc950, 0x2742, 0xd83e, 0x5092,
    0x0de0, 0x51e4, 0x626a, 0x09be, 0x45e0, 0x5a11, 0x6a86, 0xc8f7, 0xd38f, 0x9dd2, 0x3d2d, 0x597b, 0x1d08, 0xe0fa, 0x432b, 0x8d31,
    0x3902, 0x78e1, 0xb089, 0xcfc5, 0xfa00, 0xeb17, 0xdeb8, 0xe980, 0x12b2, 0x509a, 0xf6c6, 0x1df2, 0x2e25, 0x345c, 0x4ad0, 0xe88a,
    0x2b7e, 0x2671, 0x970f, 0x4f94, 0xb859, 0xc99b, 0x877a, 0x4705, 0xc089, 0xc55a, 0x235e, 0x5001, 0xed1c, 0xf1b2, 0x4c39, 0xb2db,
    0xe4ee, 0x54d0, 0x033b, 0x05c7, 0x2c73, 0x54ee, 0xca9d, 0x658e, 0xb948, 0xdbda, 0x95e8, 0x7921, 0x107c, 0x48c4, 0xb8ad, 0x459f,
    0x2f01, 0x47bd, 0xbad6, 0x4f65, 0xfda9, 0xe207, 0xb19a, 0x0a71, 0x7a3f, 0xf20c, 0x4061, 0x5a4b, 0x7d1b, 0x2728, 0x957e, 0xe993,
    0xdc37, 0xe7f7, 0xe7ca, 0x0f87, 0x3705, 0x610c, 0x4ab3, 0xd40a, 0xd487, 0x1ff9, 0x6363, 0x0101, 0xbf10, 0xcc40, 0x6321, 0x41be,
    0x1313, 0xf7f7, 0xa968, 0x6fc3, 0x57b3, 0x1dfb, 0xaee2, 0x1d54, 0xf5b0, 0x010a, 0xb26b, 0xcec5, 0xd149, 0xcfed, 0xf980, 0x6ae5,
    0x694f, 0xe908, 0x8396, 0x14b3, 0x9464, 0x3056, 0xce9c, 0xddef, 0x83a3, 0x91b9, 0x5bb1, 0xbdec, 0xd8d3, 0xbeeb, 0xe07f, 0x96aa,
    0x1fac, 0x47ea, 0xf346, 0xf734, 0x6c1e, 0x66b5, 0x0192, 0x2ecb, 0x33aa, 0x8c3e, 0xe2c3, 0x1a19, 0x15d1, 0xa095, 0x9917, 0x137d,
    0xe171, 0x4781, 0xec15, 0xe0ce, 0xf3af, 0xceb5, 0x73d9, 0x298b, 0x4bc2, 0x635c, 0x126a, 0x4e45, 0x86d6, 0x8519, 0x050f, 0xa897,
    0x6a12, 0x454e, 0x468f, 0xfb07, 0x6d3e, 0xa457, 0xaa5c, 0x8b88, 0x9c62, 0x1869, 0xb682, 0xf5a7, 0xb9ad, 0xd2c0, 0x24ff, 0xc77f,
    0x9f8a, 0x2e1e, 0xcaea, 0x4fd8, 0xa99f, 0x5e01, 0x01d3, 0x71bd, 0x4e52, 0x70fc, 0xd9af, 0xd6f6, 0xd714, 0x5c83, 0xfe8f, 0xd782,
    0x642e, 0xb5f7, 0x2d1c, 0x7cc4, 0x9e45, 0x8bbf, 0x7201, 0xc9e3, 0x32bd, 0x7433, 0x67be, 0x4f24, 0x380b, 0x3cd4, 0xa94e, 0xcbbe,
    0x1033, 0xc42f, 0xdeb0, 0xbac1, 0x9ecb, 0x4c59, 0xbaf6, 0xf751, 0x65ca, 0xdc21, 0xf80b, 0xf6de, 0x0e99, 0x7fa9, 0xd543, 0x1198,
    0x286c, 0x8160, 0x5e66, 0x1ebe, 0x43d5, 0x9811, 0xa456, 0xd7d6, 0x73a2, 0xd128, 0xb8ab, 0x5507, 0x0bae, 0xcfc8, 0x953c, 0xc22c,
    0xf08e, 0x6a8a, 0x2262, 0xde4d, 0x126e, 0xbafa, 0xe17d, 0xa476, 0x6383, 0x6b58, 0xdfdc, 0xcebc, 0x55d3, 0xa96e, 0x46af, 0xf4f6,
    0x1672, 0x6ac9, 0x5d13, 0x872f, 0xca6d, 0xa492, 0xe1f6, 0xdf48, 0x2fb6, 0x1d82, 0x124e, 0x4494, 0x856f, 0x847c, 0xa4ca, 0xfe7b,
    0x3bfe, 0x27f9, 0xb486, 0x1f78, 0x1be1, 0x05ab, 0x36cc, 0x2e12, 0x7d59, 0xf480, 0x5820, 0x1b0a, 0xd33a, 0xb8db, 0x6a6a, 0x6464,
    0x02fe, 0xb7bd, 0x4b76, 0x023a, 0x4646, 0xa6a6, 0xeb23, 0x1ca8, 0xe910, 0x93f8, 0x8a06, 0xa4df, 0xbdcf, 0x8b51, 0x1650, 0xfcd4,
    0x55ef, 0xed93, 0x2242, 0xe01f, 0xa6e6, 0x7cee, 0x0d02, 0x683a, 0xd135, 0x72f8, 0xd92f, 0x6e8e, 0x8ab6, 0xdc1f, 0xd125, 0x82b3,
    0x6376, 0xd07a, 0x3836, 0xb586, 0x4cff, 0x8ad5, 0x5c4b, 0x5bf3, 0x73ed, 0x1fd2, 0x7af0, 0xb262, 0x83a1, 0x03be, 0x8da3, 0x768b,
    0xe8a5, 0xb963, 0x92a7, 0x9845, 0xcc66, 0xc854, 0x6918, 0x629c, 0xaaa6, 0x0e01, 0xed80, 0x0aa3, 0xaea5, 0xcb2c, 0xf539, 0x81cc,
    0x472e, 0x51a6, 0x8865, 0x1348, 0x39f5, 0xcc81, 0xf8cd, 0xcdb5, 0xf76c, 0xf0a9, 0xf49b, 0xd140, 0xcee0, 0x15ec, 0xa472, 0x2d37,
    0xd960, 0x0f25, 0x65e3, 0x39da, 0x57dd, 0x2539, 0x72e7, 0x0f68, 0x0c18, 0x241f, 0x3231, 0xe53f, 0x29ca, 0x62f2, 0xf12b, 0xff46,
    0xf4af, 0x0280, 0xe1d6, 0xc1da, 0xde09, 0xfe28, 0xa1c3, 0x8a62, 0x4340, 0x480c, 0x8b49, 0x9b8b, 0x7745, 0x59db, 0xc4d5, 0x20e8,
    0x97e3, 0x82d1, 0xe06e, 0x47b3, 0x36ef, 0xbbce, 0x870f, 0xcae7, 0x4555, 0xccd8, 0xcd9a, 0xcfe4, 0xb316, 0xe05a, 0x0c0c, 0x3737,
    0x3b62, 0x4ea4, 0xc604, 0xf7ca, 0xd7d7, 0x9292, 0xa7e3, 0xd575, 0xb050, 0xae15, 0x2899, 0x1b3c, 0x0a01, 0xb0f5, 0xd5ed, 0x3a45,
    0x13e1, 0xbd52, 0x9d97, 0x6106, 0x1e42, 0x9a79, 0x9a6a, 0x41a5, 0x6fa5, 0x1794, 0x1652, 0x8163, 0x98f4, 0xf8b2, 0xb45a, 0x1d0b,
    0xfd6b, 0x3c2a, 0x0ca3, 0x92c4, 0x27bf, 0x6f48, 0x2611, 0x79f2, 0x3793, 0xb370, 0xf7d5, 0x6e51, 0x040a, 0x21cf, 0x3d4a, 0x4760,
    0xef02, 0x7880, 0x122e, 0xcc36, 0x9d7f, 0x75ae, 0x0c0b, 0xa896, 0x863b, 0xa51b, 0xb0b0, 0x3434, 0xe793, 0x8dec, 0x18c4, 0x22e4,
    0x4343, 0x0b0b, 0x8066, 0x9c58, 0x7549, 0x5169, 0x9371, 0x192c, 0x518b, 0xcfbd, 0x4173, 0x9f33, 0x3410, 0xe85f, 0x452f, 0xcb1d,
    0xb0c1, 0xd583, 0xcdc3, 0xa46c, 0x193a, 0xc91b, 0x0038, 0x1b52, 0xd7e4, 0x2f5d, 0xef37, 0x1cb6, 0xe5bf, 0x8b96, 0x1d62, 0x1a48,
    0x7ec4, 0x2ff1, 0x506b, 0x382c, 0x104f, 0x43e4, 0x4b7c, 0x1148, 0xf529, 0xba9e, 0xbe5e, 0xf977, 0x219e, 0x28ec, 0x67a9, 0x4713,
    0x9606, 0xcd6d, 0xc8cf, 0xae0b, 0x5551, 0x3633, 0x1531, 0xf19f, 0xbc17, 0x6f8c, 0x1ab5, 0x6466, 0x2822, 0xa137, 0xa545, 0x25d5,
    0xb51a, 0x6664, 0xe179, 0xae9b, 0x1063, 0x908b, 0x132d, 0x1b44, 0x51f7, 0xf6ba, 0x854f, 0xbb67, 0x1a76, 0x5c92, 0xf2bd, 0x8131,
    0xb6ae, 0xf6fa, 0xc47a, 0x0024, 0x40ec, 0x8e55, 0x314c, 0x2032, 0x59e8, 0xd2c7, 0x2446, 0x6adc, 0xc4b7, 0x8114, 0x4194, 0x6f98,
    0x741b, 0x884a, 0x5b1e, 0x002e, 0xfadb, 0xacda, 0xfe5b, 0x68b9, 0x6631, 0x6fe6, 0x3004, 0x8c0d, 0x34c1, 0x1358, 0x42da, 0x0557,
    0x2ef9, 0xfa3d, 0xfce3, 0x9b63, 0x8117, 0x4568, 0x9445, 0xbd75, 0x58ea, 0xc61c, 0xf96d, 0x80c6, 0xc800, 0xb083, 0xd703, 0x31af,
    0x4b01, 0x1b58, 0x345e, 0x4ef2, 0x4bd5, 0xe9e1, 0xd3ea, 0x313e, 0x1c79, 0xf903, 0x418a, 0xd8ca, 0x4ecc, 0x7589, 0x4942, 0xfb60,
    0x0dba, 0x2544, 0x5d0f, 0x37cf, 0x6036, 0xfb6b, 0x0b22, 0xe470, 0x9bf7, 0x5b0e, 0x519c, 0xc733, 0x140f, 0x5a1d, 0x0bc3, 0x20d3,
    0x7822, 0x26a5, 0x92e8, 0x59c1, 0x57ed, 0x2a56, 0x4d2e, 0x865a, 0x9688, 0x7f7d, 0x36e5, 0x4952, 0x2985, 0x9a4f, 0xcd35, 0xeaff,
    0x9547, 0xa51c, 0x4b20, 0xb4b9, 0x3b7e, 0xc7e6, 0xa0b2, 0x654b, 0xb4d7, 0xc962, 0x82a9, 0xbee2, 0x7711, 0xa052, 0xe7d7, 0x0e44,
    0xd081, 0x0fae, 0x996a, 0xaf12, 0x9a5e, 0x3bc4, 0xc9b1, 0x8e47, 0x0652, 0x2c00, 0x1244, 0x73a3, 0xd17f, 0x1fb8, 0xa8ad, 0x8ecd,
    0x7142, 0x0738, 0xe7aa, 0xef16, 0x41f1, 0x029f, 0xf794, 0x1122, 0xba0b, 0x3d3f, 0xceab, 0xbcf9, 0x8e17, 0x9023, 0x97a7, 0xa7a6,
    0xa8af, 0x1f03, 0x8711, 0x1e27, 0x4afe, 0x5255, 0x0015, 0x35e2, 0x93f7, 0x51f6, 0x1309, 0x235d, 0xa1e5, 0x882d, 0xe486, 0x3a7d,
    0xea9c, 0x5596, 0xb953, 0xccb1, 0xd26a, 0x9ced, 0x60eb, 0xf13f, 0xc2a2, 0xc09b, 0xd467, 0xd6b6, 0x116d, 0xf9ab, 0x1d8f, 0x3425,
    0x30a0, 0x25ad, 0xb0d8, 0x7b0f, 0x32f2, 0xa782, 0x6bd4, 0xb6a0, 0xfa55, 0x4fa6, 0xdf54, 0xfd18, 0xd504, 0x62c1, 0x76b8, 0xb790,
    0x7227, 0x9d7c, 0x2528, 0xd11d, 0xbba0, 0xf3d3, 0x00e1, 0x87b4, 0x271b, 0x4ae2, 0x9dc8, 0xf275, 0xcf18, 0x7524, 0x1ccd, 0xdb92,
    0xdb81, 0xc841, 0xee71, 0xed1e, 0xd69a, 0xbd27, 0x3974, 0x8352, 0x7185, 0xeb29, 0x1072, 0xe076, 0x5610, 0x9cae, 0x1871, 0x71e2,
    0xf30c, 0xe0ed, 0x40e4, 0x7e7d, 0x2976, 0x171d, 0xc469, 0x22f4, 0xbd37, 0xfdbb, 0xece5, 0x3ece, 0x90b4, 0xf653, 0x030b, 0x31f3,
    0xf0eb, 0x0e46, 0x6301, 0xd577, 0xb9fa, 0x8690, 0x2903, 0x0016, 0x43bc, 0xe9a5, 0x70cb, 0xc29a, 0xd750, 0x5e88, 0x71fe, 0xb1cd,
    0xf450, 0x6939, 0x11c4, 0xc531, 0x99d3, 0xfbbd, 0xee5c, 0x01ed, 0xae33, 0x034d, 0x4b93, 0x96a1, 0x8e7b, 0x34d2, 0x872b, 0x13c6,
    0x8756, 0x03c5, 0x50e2, 0xac88, 0x2cc9, 0xb384, 0x4511, 0x6c4f, 0xaf0c, 0xdbec, 0xb4ea, 0xca35, 0x09fb, 0x595d, 0xcc20, 0xf3b2,
    0x6862, 0x6ec3, 0xb24b, 0x9330, 0x062f, 0xb43f, 0x5f94, 0x4e13, 0x475d, 0x2dfb, 0x41ab, 0x91b0, 0xe575, 0x1a1c, 0x25e2, 0xb599,
    0x0426, 0x521d, 0x72ff, 0x612d, 0xbaaa, 0x8783, 0x3325, 0x2438, 0x73e2, 0xaeeb, 0x0d0b, 0xe1ff, 0x6921, 0xa7ec, 0x0041, 0xfe64,
    0x9d09, 0x9408, 0x1cf0, 0xd4a1, 0xa17b, 0x2eb4, 0xeed7, 0x0212, 0xec5b, 0x332e, 0x4ee6, 0x7bcc, 0x944e, 0xc9ba, 0x00ea, 0x451a,
    0x1e44, 0x2c33, 0xa1e7, 0xa880, 0xa2ec, 0x2a1c, 0x8e6c, 0xba85, 0x7cad, 0xb621, 0x404d, 0x501f, 0x4f78, 0x306a, 0xbc73, 0x38df,
    0x863c, 0x484d, 0x2959, 0x67a2, 0xb712, 0x7a0e, 0xec52, 0x3a2e, 0x968e, 0xe93e, 0xbf40, 0x98d9, 0x60ef, 0x82ad, 0x0045, 0x2d30,
    0x45a1, 0x0f51, 0x00a9, 0xdfb5, 0x3cf6, 0x02e2, 0xc9f8, 0xd2b9, 0x2615, 0xbe62, 0xd129, 0x839a, 0x4146, 0x4e6b, 0x4c3d, 0x8cc5,
    0x9c41, 0xc3dd, 0xee3d, 0xde1a, 0x6e35, 0x2312, 0xf010, 0xf652, 0xc8ce, 0x1f77, 0x3901, 0x1a31, 0xf897, 0x623f, 0x6b30, 0xf10f,
    0xa830, 0xd31c, 0x6648, 0x627a, 0x1014, 0x1dab, 0x6ac5, 0x7fa6, 0x067c, 0x9d63, 0x46d7, 0x64f2, 0xc392, 0x1b2d, 0x7b7a, 0x57a3,
    0x35a7, 0xa320, 0x107a, 0x526d, 0xc1cb, 0x6898, 0x091b, 0xb41a, 0x09a7, 0xca2f, 0x7b2b, 0xdef3, 0x6bed, 0xfad5, 0x15f9, 0x8ea7,
    0x5fef, 0x6f4a, 0x5cda, 0x9025, 0xa3e1, 0x0a5a, 0xe4d1, 0xc4a9, 0x6164, 0x1637, 0x81fc, 0x3c8e, 0xd521, 0x6042, 0x1ddb, 0x2380,
    0x22ba, 0xb412, 0xaee8, 0x6b3b, 0x3b73, 0xe81b, 0xe74e, 0x6d49, 0x19c7, 0x50bb, 0xa36d, 0xbde3, 0xfc07, 0xb9ee, 0x9e98, 0x9219,
    0xfde2, 0x39e2, 0xaec2, 0x7cf5, 0x33b2, 0xddc7, 0x7bc3, 0x6ef8, 0x6e86, 0xa657, 0x166e, 0x66f2, 0x5349, 0xc307, 0x8148, 0x45fd,
    0xf9a3, 0x1397, 0x869b, 0x5770, 0x0ced, 0x5cb0, 0x6fa3, 0x04e5, 0xc74d, 0x4a8d, 0xb098, 0xfd3a, 0xf011, 0x4b57, 0x27cc, 0xd25b,
    0xc50f, 0xfb9a, 0x2d2c, 0xc4e1, 0x682a, 0x7772, 0x35e3, 0x6f8a, 0x74f8, 0xf6f2, 0x06e5, 0xd67b, 0xbdac, 0x969e, 0x53ba, 0xfa71,
    0xe944, 0xac9b, 0x80c9, 0x00da, 0x5baf, 0x5a89, 0x4edd, 0xda97, 0xd03c, 0x3f1f, 0x12f3, 0xc34f, 0xc6d3, 0x79a5, 0x256a, 0xbd6e,
    0x1779, 0x9580, 0x6db0, 0x1766, 0x8be7, 0xf6dc, 0x8069, 0x7a07, 0xdabb, 0xe875, 0xc8e6, 0x5ba8, 0xd298, 0x6a28, 0xf9e2, 0xb73d,
    0xebea, 0x49b8, 0x8308, 0x27a4, 0x56cd, 0x566c, 0xb387, 0x4de7, 0x4f2f, 0x4d4f, 0x15be, 0x11f2, 0x4858, 0xc28d, 0x7605, 0x2ad7,
    0x91da, 0x85f7, 0x98f7, 0xcc9d, 0x73c9, 0x3fd4, 0x10a1, 0x42cc, 0xc3d2, 0xe6b2, 0x932a, 0xf9ef, 0x9733, 0xef76, 0xbf0a, 0xcf62,
    0x649d, 0x16e8, 0xc4e8, 0x8e97, 0x6f2d, 0x6e4e, 0xeece, 0xddf5, 0xbb94, 0x2aac, 0x3b45, 0xa16c, 0xac16, 0x846f, 0xbf3c, 0x3cbf,
    0x7984, 0x18fb, 0x700a, 0x992a, 0xb154, 0x54b1, 0x4059, 0x53f3, 0xf838, 0xe594, 0x0cba, 0xce93, 0xda33, 0xd04d, 0xa075, 0xbe76,
    0x6c69, 0xb178, 0x1e59, 0x3435, 0x03b1, 0x3956, 0xa48e, 0xe319, 0x43a9, 0xe039, 0x338a, 0xe678, 0x43f4, 0x25f6, 0x4d60, 0xd304,
    0x21fe, 0x660d, 0x29ef, 0x4422, 0xc530, 0x80c8, 0x5642, 0x134a, 0xc773, 0xb8ac, 0xdc1e, 0xc4b6, 0x079a, 0xe3e7, 0x155c, 0x0b69,
    0x1eaf, 0x83c6, 0x9a24, 0xedf2, 0xfd0b, 0x0682, 0x19f9, 0xc175, 0x23f8, 0x9611, 0x79d7, 0xdde6, 0x4a46, 0xb4f5, 0xe2b8, 0xfb84,
    0x86fb, 0xfefc, 0xf684, 0xe358, 0x84fb, 0xb8e2, 0x0209, 0x9bd5, 0x695b, 0xa0cf, 0x93ac, 0xdd02, 0xea3e, 0x5ed7, 0x1d22, 0x127f,
    0x54af, 0xf844, 0x07e3, 0xfa78, 0x94c0, 0x85d4, 0xa172, 0x8f5c, 0xc382, 0xb506, 0xca69, 0x63bd, 0x099f, 0xeb87, 0x47ca, 0xa7e9,
    0x30c8, 0x4025, 0xd2f5, 0x4d7e, 0x4027, 0xa6de, 0x3cc7, 0x6623, 0xb3f0, 0xb253, 0xf57d, 0x945b, 0xf90b, 0xe4a5, 0xab86, 0xfd50,
    0x5f5b, 0x915a, 0xf326, 0x490a, 0x5c87, 0x6a8e, 0xacde, 0x4810, 0x05fe, 0x22ce, 0x550f, 0x4660, 0x2221, 0x7c49, 0x0365, 0xef0a,
    0x6046, 0x0f55, 0x456c, 0xfdbf, 0x7c4d, 0x83ca, 0xd8bd, 0xa20e, 0x3c0f, 0x9861, 0x3a64, 0xfea5, 0xffd9, 0x110e, 0xa4f8, 0xa482,
    0x977a, 0x3c70, 0xf3fe, 0x5702, 0xc83f, 0x34a4, 0x1f36, 0x61e1, 0x83f7, 0x24b6, 0xd604, 0x304d, 0xbc86, 0xc622, 0x53fe, 0x2313,
    0x530c, 0x0c88, 0x60e0, 0x0782, 0x2800, 0x4aff, 0x2eab, 0x8bff, 0x8614, 0x7a30, 0x1c73, 0x7a1b, 0x03e1, 0xcd48, 0xcdaf, 0x7396,
    0xf61b, 0x5643, 0x98d5, 0x7837, 0x4cb4, 0x6d10, 0x1764, 0xd42c, 0x316b, 0x05ae, 0xe9cd, 0xcde9, 0xaac2, 0xb94b, 0x9754, 0x9516,
    0x13c3, 0xc313, 0x7e3a, 0x575d, 0x418c, 0x422e, 0x92a9, 0x00a7, 0xec7f, 0xfeff, 0x6bfe, 0x4829, 0x63fe, 0x4149, 0x84de, 0xa088,
    0xaa29, 0xc23b, 0x6a50, 0x2e87, 0xe6c2, 0x6215, 0x1493, 0x6a9f, 0xd6cf, 0x428a, 0xbed8, 0x7608, 0x436c, 0x5af9, 0x044f, 0xd4a4,
    0x7937, 0x8988, 0xe1f2, 0xf289, 0xb563, 0x0282, 0xcb43, 0x5b10, 0xb60d, 0xecc2, 0x4938, 0x1251, 0x21b4, 0xa8ef, 0x2b9c, 0x2193,
    0xd512, 0x6181, 0x3eea, 0xd75e, 0xa55d, 0xd18d, 0x4eda, 0x0afa, 0x4c6c, 0x4154, 0x692f, 0x14aa, 0xd52f, 0xe98b, 0x48a7, 0xbdba,
    0xaa14, 0x2f69, 0x21c2, 0xfb3f, 0x4d76, 0xd8b9, 0xd498, 0xa6ad, 0xf919, 0x75c1, 0xd690, 0x03ef, 0x6840, 0x07a8, 0x9741, 0xd279,
    0x90d2, 0xff20, 0xb0b1, 0xa7d2, 0xdaba, 0xdbeb, 0xfd9d, 0x4828, 0xfda8, 0xfc9c, 0xfe5a, 0x5bf2, 0xfc95, 0xaaa4, 0xbf99, 0x98c5,
    0xa38f, 0xd73f, 0x4745, 0x794e, 0x11eb, 0x0090, 0x6658, 0x883c, 0x5508, 0x4bd2, 0xbf36, 0x59ce, 0x2f5b, 0x0252, 0x3036, 0xc010,
    0xfd41, 0x0a0f, 0xceee, 0xf5dd, 0x341e, 0x78f5, 0x1ce7, 0x1a84, 0x0bbc, 0x01e2, 0xddbd, 0xbddd, 0xed66, 0xb9bb, 0xd157, 0x1268,
    0xf890, 0x90f8, 0xce7c, 0xcd05, 0xb723, 0x3d2f, 0xa9d1, 0xf328, 0x33da, 0x4dd0, 0xe93a, 0x838d, 0x4b50, 0x0979, 0x6e8c, 0xed2a,
    0xb355, 0x9b15, 0xd99b, 0xa9fe, 0x4fc0, 0x997e, 0x9e79, 0x8eb6, 0x5ea4, 0x28df, 0x782d, 0xe8ff, 0xeeff, 0x7fc3, 0xed8b, 0x6087,
    0xbbf8, 0xe459, 0xe0bf, 0xde22, 0x9377, 0x9888, 0x93ff, 0xfacd, 0x44d0, 0x0098, 0xd8b3, 0xc2af, 0x4d68, 0xcdef, 0x8a79, 0xa6c4,
    0x7af8, 0x7999, 0x775c, 0x6857, 0x23c4, 0xf702, 0xd598, 0x3778, 0x9bbb, 0xd66e, 0xe02f, 0xdb7b, 0x487d, 0xff91, 0x0d47, 0x470d,
    0x0582, 0xa1b0, 0x328f, 0x9d1a, 0xd962, 0x62d9, 0x968a, 0xfc36, 0x57f9, 0x7558, 0x9729, 0x7087, 0x7fec, 0xfffe, 0xd622, 0xd35b,
    0x3c81, 0x04ec, 0x5b91, 0xdc70, 0x1925, 0x158c, 0x9d00, 0x7a9b, 0xa1bc, 0x04ce, 0xfc2c, 0x94ec, 0x35bf, 0xb5c4, 0x6e36, 0xb338,
    0x9e3e, 0xf8c1, 0xb3b0, 0xc079, 0x5256, 0xf59c, 0xfdc1, 0x68ab, 0x8305, 0x8bd8, 0x3248, 0x6946, 0xa69f, 0x291f, 0xdf44, 0x45e6,
    0x134b, 0x9205, 0x3252, 0xada7, 0x85e7, 0xba6e, 0x0f3c, 0x6198, 0x90d9, 0xf7ba, 0xa8e5, 0xdefe, 0x9add, 0xff62, 0x9199, 0x6ad4,
    0x377b, 0xd725, 0x599a, 0x2d19, 0xd46a, 0x9991, 0xf137, 0x457c, 0x6263, 0xa20a, 0xfd9e, 0x2a3d, 0x26f3, 0x0a49, 0xbe31, 0xf05e,
    0xc42c, 0x110a, 0x3be2, 0xe702, 0x2b3c, 0x8408, 0xdf16, 0xfab0, 0xd16b, 0x97f5, 0xb66f, 0x8c35, 0xfb1b, 0xbf84, 0xc2db, 0x97c8,
    0xbf55, 0x7c3e, 0x5e51, 0x6f0e, 0xd993, 0xf1bb, 0xb618, 0x131f, 0x8522, 0xcff6, 0xdc28, 0x8485, 0xcb35, 0xb0fe, 0x8b9f, 0x1361,
    0xb5cd, 0xcdf8, 0xb9c4, 0x07b1, 0xeb90, 0xcd51, 0x8478, 0x5ee0, 0x82b6, 0xa7f5, 0x79ae, 0xc310, 0xb08c, 0x1fc1, 0x752d, 0x5966,
    0x110d, 0x7feb, 0x71e1, 0x8147, 0x5e12, 0x1ae3, 0x4c5f, 0xa97e, 0xc4b9, 0xb107, 0x2ccb, 0xa5ae, 0x6ac8, 0x7ec3, 0xb240, 0x6269,
    0x283e, 0xe053, 0xadc6, 0x4462, 0xe43b, 0x8ded, 0x7ca4, 0x7e9a, 0x185e, 0x9906, 0xdd1f, 0x194d, 0xde8d, 0xc4b0, 0x2955, 0x3394,
    0x9f1d, 0x6ee9, 0x09c8, 0x88d1, 0x2e84, 0x46a8, 0x2b16, 0x907d, 0x84a8, 0x41b7, 0x1281, 0x33a1, 0x0274, 0x6dea, 0x74e8, 0x0baf,
    0x5ae0, 0x16b3, 0x7a7a, 0x1c1c, 0x793e, 0xdec8, 0x4798, 0xb18f, 0x37dc, 0xf7e7, 0x640e, 0xcfa9, 0x2c6b, 0xa732, 0x89ce, 0xa344,
    0x2a72, 0x5093, 0x6bb2, 0xc5ce, 0x06eb, 0xc37a, 0x333f, 0x4915, 0xb7b7, 0x3c3c, 0x75d5, 0xe3a7, 0x53b4, 0xca16, 0x3719, 0x92c1,
    0xe4ff, 0x7eb3, 0x679e, 0xa3ad, 0xcf31, 0xd988, 0xa85c, 0x23d7, 0x8804, 0xf77e, 0xc402, 0x916f, 0xf4c4, 0x90cc, 0x8225, 0x9c13,
    0xad7a, 0x3517, 0x81b8, 0x36d4, 0x9422, 0x5895, 0x5c9a, 0xb50c, 0xf37b, 0x135a, 0xdff0, 0xfbbf, 0x7929, 0xfe42, 0xfae1, 0xc267,
    0x8ccd, 0x5455, 0x3755, 0x1d3c, 0x1ba5, 0x3b86, 0x7171, 0x5a5a, 0xfa62, 0xf54b, 0x01ea, 0x1a10, 0xe11b, 0xab05, 0x7413, 0xf68c,
    0x93b6, 0x82be, 0x3526, 0x69ab, 0xbbb3, 0x777d, 0x5016, 0xd4fc, 0x1aaf, 0xc866, 0xaf7c, 0x4c60, 0x1717, 0xa5a5, 0x589c, 0x6680,
    0xffbb, 0x0dff, 0x2232, 0x599d, 0x4ac3, 0x21bb, 0xab45, 0xb1d0, 0x77c3, 0xde1b, 0x10df, 0x4f88, 0x6b9a, 0xffd5, 0x79be, 0x7ae8,
    0xd7e2, 0x0c81, 0x6445, 0x8712, 0x97b2, 0x8780, 0xe4c9, 0xae8d, 0xf947, 0x20fa, 0x37eb, 0xfe4f, 0xf27b, 0x86f4, 0x7472, 0x89ad,
    0x1b81, 0x3bbd, 0x8189, 0x4e43, 0x9bae, 0x79e1, 0x4044, 0x21ff, 0x03d2, 0x65f5, 0x856b, 0x142c, 0x3c95, 0x2cc2, 0x4f3b, 0xdd19,
    0x1bb8, 0xecd1, 0xd92d, 0xe808, 0xfbb2, 0x7bbc, 0xcb9e, 0x594c, 0x3998, 0x2431, 0xcacc, 0xe2ba, 0x4440, 0xff21, 0x8c6f, 0x17bc,
    0xe24c, 0xfc56, 0xc2cf, 0x4ec9, 0xdc90, 0xa74f, 0x4f6f, 0x6af4, 0xcd25, 0x742d, 0x4e32, 0xc030, 0xb152, 0x6abf, 0x14ca, 0x8eae,
    0xccbd, 0x2fa7, 0xf71f, 0xbe96, 0xb6ca, 0xc195, 0xe698, 0x8541, 0xe3e9, 0x8c1f, 0x4849, 0x15c8, 0x492a, 0xa6dc, 0xea03, 0xa809,
    0xd597, 0x480f, 0x3b72, 0xf3d2, 0xf91f, 0x87d4, 0xd6d6, 0x5454, 0x2577, 0x315e, 0x4972, 0xd869, 0xef36, 0xcebb, 0xa9cf, 0x0e64,
    0xc454, 0x7fc6, 0x83ba, 0xbbab, 0x9350, 0x722a, 0xedd5, 0x453a, 0x7d15, 0x8126, 0xb764, 0x23a0, 0x5757, 0x0505, 0xc36f, 0x68a9,
    0x05f1, 0x6af8, 0x88d5, 0xc26b, 0xe794, 0x5474, 0xc050, 0x917b, 0xdb7f, 0x1a88, 0x992e, 0xa08c, 0xfd1c, 0x8e4b, 0x9334, 0xd25f,
    0x2d4a, 0x596c, 0xfe6f, 0x05d1, 0xa3cd, 0xa4f4, 0x3061, 0xf6ac, 0x8167, 0x1b56, 0xb58a, 0x1381, 0xecb4, 0x7eba, 0xcfc9, 0x8fda,
    0x149f, 0x5490, 0x5ac4, 0x7a6b, 0x07fb, 0x8f46, 0x6725, 0x91f4, 0xb427, 0x1ac7, 0x6dae, 0xc66f, 0x72a4, 0x372d, 0xeb7f, 0x0d11,
    0xd83f, 0x347a, 0xa4c6, 0x356d, 0x10c3, 0xae79, 0x66cc, 0x54c8, 0x2905, 0xcd7f, 0xa547, 0xdfb3, 0x2567, 0xf491, 0x5c63, 0xc24b,
    0xfb27, 0xb5a8, 0x15bb, 0xcbde, 0xd892, 0xde0f, 0x0121, 0xe6c9, 0x6cc0, 0xd7f6, 0x44b4, 0xebfb, 0xe03f, 0xcf75, 0x31cb, 0x6484,
    0x961c, 0x68d9, 0xbb87, 0x8338, 0xcc56, 0x1462, 0x719d, 0x1a68, 0xc1fa, 0xa47e, 0xb660, 0x2d57, 0x21a6, 0xcb07, 0x8183, 0x081e,
    0xd6d7, 0x56a4, 0x2070, 0xf643, 0x3baa, 0xcca5, 0xbc6a, 0x9b21, 0x4f85, 0x67bb, 0xbc7b, 0xb2fb, 0x4f9e, 0xb237, 0x5274, 0xfb73,
    0x19dd, 0x3b4f, 0x0696, 0x6dcd, 0x02b5, 0xacd2, 0xb064, 0xc64d, 0x7020, 0x43f6, 0xa97f, 0x990e, 0xf074, 0x54dd, 0xfe77, 0x3a04,
    0x701e, 0x2cec, 0x371c, 0x56e4, 0x81e0, 0x1838, 0x95c0, 0xbcff, 0xee3e, 0x9d91, 0x6f30, 0x05ed, 0x88a8, 0x901d, 0x2dfe, 0xd23f,
    0x3b09, 0x8c1d, 0x1e28, 0x3ab4, 0x7683, 0x32b1, 0x8638, 0x8123, 0x60c1, 0x22f6, 0x286f, 0x8133, 0x2185, 0x1e8c, 0xe0fd, 0x892d,
    0xdbb8, 0x3ad3, 0xcaca, 0xfcfc, 0x0cc4, 0x0bf1, 0x660e, 0x0c49, 0x02ef, 0x8078, 0x8cf6, 0x1374, 0x08fe, 0x6584, 0xda56, 0xe833,
    0x7d77, 0xb3bb, 0x7341, 0x339f, 0xbb7c, 0x2689, 0x38d6, 0x3da1, 0xacac, 0xcfcf, 0xa81c, 0x23eb, 0x90d3, 0x6260, 0x41d5, 0x2aee,
    0xc85a, 0x7852, 0xca84, 0x7c64, 0xc78e, 0x129a, 0x10bc, 0x1916, 0x270e, 0x6961, 0x32aa, 0x98a3, 0xfd5c, 0x4843, 0x48c2, 0x42a5,
    0xd6b5, 0x7b2a, 0xb505, 0x5ea3, 0x9c12, 0x31ca, 0xf7af, 0xa537, 0x6c08, 0xbdfe, 0x86b6, 0x5aa4, 0x0441, 0xbaa0, 0x4c58, 0x9d7e,
    0xac7c, 0x7c7f, 0x5e9c, 0xe9f2, 0xac61, 0x7db3, 0xe502, 0xa8cb, 0x6a5d, 0x01a4, 0x7a0a, 0xf72b, 0x52e2, 0xc345, 0x1c76, 0x3863,
    0x2e9f, 0xc5e9, 0xdc43, 0x7ede, 0x77de, 0xdd34, 0xa877, 0x5470, 0x72bf, 0xa0a7, 0x3b8d, 0xa76a, 0x7d92, 0x813e, 0xfe92, 0xa499,
    0x5fa4, 0xd536, 0x124a, 0x07db, 0xeba8, 0xbf65, 0x6b6f, 0x22e5, 0xd4f1, 0xbf22, 0x1792, 0x895e, 0x84c5, 0xe9d7, 0x9722, 0x15e1,
    0xd47b, 0x12f0, 0x9cbd, 0xd9c7, 0xc90b, 0xaf44, 0xec78, 0xa129, 0x4e89, 0xd41c, 0xb8a5, 0xbc15, 0x5aeb, 0x953d, 0x0a54, 0xe22e,
    0x4107, 0xae26, 0xef52, 0x8e07, 0x37ae, 0x3a60, 0xa1de, 0x51c1, 0xbdea, 0xb27d, 0x5e81, 0xa4ad, 0xe18c, 0x71d8, 0x633c, 0x91d4,
    0x277c, 0x09d9, 0x2379, 0x2743, 0x4a0d, 0xd0e5, 0xdf79, 0x74d3, 0x2fd3, 0xf809, 0x2279, 0xf33d, 0x0d17, 0x4b89, 0xbc6c, 0x3b47,
    0xc0f5, 0x6bcc, 0x2d3f, 0xe6ec, 0xa94b, 0x7ae5, 0xe0ae, 0x370d, 0x08b7, 0x32cf, 0xd55a, 0x47e1, 0x8b0d, 0xf7b0, 0x4490, 0x906c,
    0xd207, 0x9058, 0xc0d6, 0x6314, 0x9943, 0xe734, 0x2c2a, 0xbc09, 0x2ffc, 0x7cd6, 0x787a, 0xf552, 0xd6c1, 0x7fe2, 0x1d89, 0x7d98,
    0xb3c3, 0x4290, 0xb6f8, 0x87d5, 0x6432, 0x8573, 0x59ec, 0x57e1, 0x9e4b, 0xfea1, 0xe151, 0xeb5f, 0x7de4, 0xa7c8, 0x409e, 0x7602,
    0x35ab, 0x60f3, 0x1c7d, 0xb9fe, 0x604a, 0xea42, 0x4c70, 0x85eb, 0xac46, 0x5e13, 0x2fd7, 0x604e, 0xd7e6, 0xcb39, 0xdb83, 0xd896,
    0x3f4e, 0x4a77, 0xb639, 0xce3f, 0x9277, 0xf1a2, 0x1e3b, 0x4a68, 0xb780, 0x6d50, 0x362c, 0xc3de, 0xea82, 0x1104, 0x1ed5, 0x4d95,
    0x26f0, 0xa8b0, 0xf74a, 0x48f2, 0x8ba5, 0xcd08, 0x42f0, 0x6458, 0x903f, 0xc791, 0x9bea, 0x1fa3, 0x75fa, 0x3161, 0xce95, 0xc64f,
    0xd519, 0x1f46, 0x007f, 0xd7bc, 0x1f14, 0x29f0, 0xb70e, 0xd60e, 0x7565, 0xec27, 0x7bd2, 0xad69, 0x146e, 0x42c2, 0x7d2b, 0xbca0,
    0x2db9, 0xd1cc, 0x73b9, 0xb407, 0xc69e, 0xf75d, 0xe4e7, 0xed47, 0x29a9, 0x636e, 0x0502, 0xe790, 0x0b90, 0x1e4f, 0x486e, 0xa7d3,
    0x5fee, 0x25ac, 0xe0be, 0x4d7d, 0xcc55, 0x5894, 0x422b, 0xbc08, 0xdcd7, 0x287e, 0x70e9, 0x9f00, 0x4b41, 0x7c34, 0x452e, 0xc22b,
    0x7809, 0x3dea, 0x3c15, 0x9791, 0x013e, 0xd2e1, 0x1d7e, 0xc8c1, 0x51cc, 0x5519, 0xc8f1, 0x3639, 0x6a42, 0xe431, 0x3c09, 0x60ae,
    0x9a87, 0x0167, 0x466f, 0x2547, 0xeabe, 0xc929, 0x8e63, 0x436f, 0xaceb, 0xbb08, 0x7cfc, 0xf340, 0x5e0f, 0x4c56, 0x1b21, 0x3064,
    0xc1b6, 0x985d, 0x63a7, 0xe40d, 0x30fe, 0x7b1b, 0xe268, 0xf52c, 0x8c80, 0x7fbb, 0x6808, 0x0189, 0xd894, 0x4f31, 0x54fc, 0xf170,
    0xc153, 0x7919, 0xf607, 0xc937, 0x39bb, 0xcb4f, 0x18c5, 0xb035, 0xf998, 0x8581, 0x29fe, 0x60bf, 0x3a6e, 0x546a, 0xfa9a, 0x7dc1,
    0x6594, 0x3b94, 0x79ef, 0x95bd, 0xded6, 0xca45, 0x8b68, 0xcd5f, 0x8f54, 0xdf5a, 0xcd7d, 0x87e2, 0xc22d, 0xccb3, 0x0bff, 0x9f35,
    0xadfa, 0xf3e1, 0xfbcb, 0xc04c, 0x02ad, 0xc145, 0x710f, 0xfb79, 0x2320, 0xdfee, 0xeb3a, 0x2ec2, 0xdcaf, 0xe829, 0x5a97, 0x0069,
    0x7903, 0xd8e9, 0xc951, 0xd19b, 0x9fb7, 0xf710, 0xba7c, 0x17a7, 0xa5ac, 0x6a9c, 0x6d1e, 0xa527, 0x0690, 0xa975, 0xec4e, 0x6e5c,
    0x52c7, 0xe630, 0xe465, 0x054f, 0x0b96, 0xa19d, 0xa2e3, 0xc52e, 0x3d52, 0x7d6b, 0xc7b2, 0x4604, 0xa538, 0x5e09, 0xe29b, 0x78cd,
    0x9fd1, 0x5135, 0x24df, 0xd81f, 0x047c, 0xd5d2, 0x422c, 0x5543, 0x35f7, 0x1f8a, 0x7b07, 0x6c15, 0xe6b4, 0x1464, 0x9d53, 0xcab2,
    0xd099, 0x4089, 0xf920, 0xc060, 0x598a, 0xcb41, 0xd091, 0xc32a, 0x8508, 0x1662, 0x9624, 0x6518, 0x19ba, 0x5e99, 0x0958, 0x9177,
    0x7659, 0x0c90, 0x3a2a, 0xca73, 0xfc34, 0x312f, 0xedac, 0xa2bb, 0x1ae4, 0xa6b8, 0x04d4, 0x01f5, 0xf545, 0x6b65, 0xd2a0, 0x354d,
    0x7e17, 0x3e53, 0xe5ed, 0xf0e9, 0x3666, 0xd02f, 0x216b, 0xe149, 0x335e, 0xa6f8, 0x9c42, 0x66ac, 0xf7fa, 0xb021, 0x1c5b, 0x7478,
    0x1f04, 0x3112, 0x1f01, 0x74b5, 0x17bf, 0x1f96, 0x2a13, 0xf191, 0x09aa, 0x82c5, 0x2fb2, 0x09e6, 0x6a91, 0x1ada, 0x6851, 0xd443,
    0xac42, 0x5cd8, 0x8acd, 0xaad9, 0x4423, 0x18b7, 0xf587, 0xae59, 0xef83, 0x3848, 0xa334, 0x2419, 0x56b9, 0xb02b, 0xb290, 0x0b1c,
    0xa87e, 0xc355, 0x4be1, 0xe4be, 0x03ff, 0xb554, 0xdf92, 0xf2d7, 0x521a, 0x1fe4, 0x2d8d, 0x162f, 0xb0da, 0x3c0b, 0xb0b2, 0xe001,
];

/// EXP_TABLE[e] = 257^e. The final entry closes the cycle back to one.
pub(crate) static EXP_TABLE: [u16; 65536] = [
    0x0001, 0x0101, 0x100a, 0x0ab1, 0x1bff, 0x4401, 0x47c1, 0xb41c, 0x5c25, 0xeb06, 0xbb01, 0xbe51, 0xbb26, 0x9976, 0xea46, 0xea4a,
    0xe646, 0x263e, 0x5972, 0xe976, 0xe967, 0xf876, 0xf8d7, 0x5976, 0xed72, 0xa94f, 0xd2b2, 0x972b, 0x5979, 0xe27d, 0x5929, 0xb22d,
    0x0b2e, 0x956b, 0x3b2f, 0x95a7, 0xf7e3, 0x922b, 0x0c5e, 0x922a, 0x0d5f, 0x8220, 0x07ee, 0x99df, 0x43ef, 0xde1e, 0xf7f3, 0x823b,
    0x1cf5, 0x393a, 0xa2a4, 0x821c, 0x3bd2, 0x685a, 0xd198, 0x8e1c, 0xf7a6, 0xd76e, 0x1ed0, 0x3e09, 0xe6a6, 0xc6de, 0xbfd0, 0x2bac,
    0x169f, 0xf91e, 0x81b4, 0xa067, 0x63c9, 0xf94e, 0xd1e4, 0xf260, 0x448f, 0xc94f, 0xd128, 0x3eac, 0x4303, 0x32f2, 0xd129, 0x3fad,
    0x5309, 0x3843, 0xcad6, 0x7bac, 0x14c8, 0x8c5f, 0x96f3, 0x90aa, 0xafc9, 0x320e, 0x2dd5, 0x09dc, 0x458f, 0xd844, 0xcb93, 0x2fe2,
    0x1cfd, 0x3132, 0x22f4, 0xd794, 0xe42a, 0x6844, 0xcf86, 0x7edb, 0x3698, 0xff6f, 0x96ff, 0x9ca6, 0x6fb1, 0x4d42, 0x9dd1, 0x09cd,
    0x549e, 0xd8e5, 0x6a32, 0x9be6, 0x58c0, 0x4acf, 0x676d, 0x19c6, 0x5f2e, 0xd310, 0x2482, 0xc7d8, 0xa8dd, 0x512b, 0x3877, 0xfee2,
    0x0a79, 0xd337, 0x03a5, 0x96b8, 0xdbe1, 0x5d2b, 0xf403, 0x41d6, 0xc531, 0x6322, 0x12a5, 0x8708, 0x7ae1, 0x488e, 0x043a, 0x7e16,
    0xfb55, 0xe8e9, 0x67f3, 0x8758, 0x2ab1, 0x1a89, 0x237c, 0x4e17, 0xfb99, 0x2425, 0x607f, 0x7ce5, 0x2ab0, 0x1b88, 0x3376, 0x44a6,
    0xe066, 0x6024, 0x27be, 0xc8f9, 0x7695, 0xf08e, 0x8877, 0xfaf7, 0x5b40, 0xf952, 0xcdf8, 0x22b3, 0x90d3, 0xd6b0, 0xd105, 0x1381,
    0xb227, 0x0124, 0x352f, 0x7bc5, 0x7da1, 0x7fff, 0x03b7, 0x84aa, 0xeb5e, 0xe359, 0x6c06, 0xc9e8, 0x768f, 0xea94, 0x3898, 0x110d,
    0x1cbd, 0x7172, 0x6058, 0x5bc2, 0x7bd0, 0x68b4, 0x3f76, 0x88d2, 0x5f52, 0xaf6c, 0x97ab, 0xd9f9, 0x6725, 0x518e, 0x9dd2, 0x0ace,
    0x6480, 0xc736, 0x4633, 0x57e5, 0x9083, 0x86e0, 0x8302, 0x34c7, 0x8226, 0x01e8, 0xf9e3, 0x7c49, 0x861c, 0x7ffe, 0x02b6, 0x94a0,
    0xe1ef, 0xf8a6, 0x2807, 0x8e29, 0xc293, 0xb6b1, 0xd39e, 0xaa0c, 0xa2ec, 0xca54, 0xf92e, 0xb184, 0x919a, 0x8ef2, 0x1948, 0xd1a0,
    0xb624, 0x460b, 0x6fdd, 0x212e, 0x3e53, 0xbcfc, 0x349d, 0xd87c, 0xf3ab, 0x9e4f, 0xa44e, 0x0ecc, 0x22ae, 0x8dce, 0x1669, 0x0fe8,
    0x1781, 0xf60b, 0x6bc8, 0x7017, 0x1436, 0x72a1, 0x8096, 0x934e, 0x7830, 0xbb49, 0xf619, 0x79da, 0x40a8, 0xaa44, 0xeaa4, 0x08a8,
    0x20f0, 0xf186, 0x9174, 0x601c, 0x1f86, 0x7954, 0xce26, 0xcf70, 0x882d, 0xa0ad, 0xa903, 0x9efe, 0x15ff, 0xaa63, 0xcd83, 0x59c8,
    0x53cc, 0xfd86, 0x5d00, 0xdf28, 0xd0ce, 0xc941, 0xdf26, 0xdec0, 0x292d, 0xb508, 0x593a, 0xa13e, 0x2b9b, 0x21a8, 0xb8d5, 0x5998,
    0x039c, 0xaf81, 0x7a46, 0xef29, 0xd002, 0x058d, 0xd8aa, 0x257d, 0x292c, 0xb409, 0x4930, 0xab8f, 0x3064, 0x65a9, 0xff14, 0xed84,
    0x5fb9, 0x4487, 0xc147, 0x5178, 0x6b24, 0x9cfb, 0x32ec, 0xcf37, 0xcf6a, 0x9237, 0x1042, 0x42f9, 0xd903, 0x9ddf, 0x07c3, 0xb4f2,
    0xb2cb, 0xedc8, 0x13f5, 0xc653, 0x325d, 0x7e86, 0x6bc5, 0x7d1a, 0xc444, 0x075c, 0x2b6d, 0xd75e, 0x2ee0, 0x0ff4, 0x0b9d, 0x26d8,
    0xbf94, 0x6fe8, 0x141b, 0x5f8c, 0x71b2, 0xa098, 0x9c36, 0xff21, 0xd8b1, 0x3e66, 0x89c9, 0x5542, 0x1532, 0x67ae, 0xda05, 0xa8c4,
    0x4832, 0xb886, 0x0acb, 0x6185, 0x9714, 0x6646, 0x23e6, 0xd48d, 0xce2e, 0xc778, 0x087d, 0xf525, 0x76fb, 0x9ee0, 0x0be1, 0x5aa4,
    0x0cbd, 0x71c9, 0xdbe3, 0x5f29, 0xd417, 0x54b4, 0xf2cf, 0xeb20, 0x9d27, 0xff3b, 0xc2ab, 0x8e89, 0x6233, 0x12bf, 0x9d12, 0xca0e,
    0xa374, 0x43c7, 0xf636, 0x56f5, 0x9198, 0x8cf0, 0x395c, 0xc4c2, 0x81da, 0xce09, 0xe05f, 0x591d, 0x8619, 0x7afb, 0x5294, 0xb4d5,
    0x95ec, 0xbca8, 0x60c9, 0xca53, 0xfe29, 0xc1b2, 0xa48d, 0xcd0f, 0xd544, 0x16ec, 0x8a6d, 0xc2fb, 0xded9, 0x3034, 0x35f9, 0xad13,
    0xcac2, 0x6fb8, 0x444b, 0x0d8b, 0x56f4, 0x9099, 0x9cfa, 0x33ed, 0xdf3d, 0xc5db, 0x89c8, 0x5443, 0x0538, 0x6d1f, 0xc1fa, 0xecc5,
    0x0ff3, 0x0c9a, 0x56ee, 0x8a83, 0x2c15, 0xd817, 0x98c0, 0x4dfb, 0x2468, 0x2d32, 0xee3b, 0xd31b, 0x2f89, 0x7796, 0xe286, 0xa2d2,
    0xf46a, 0x28bf, 0x3691, 0xf666, 0x06a5, 0xc39f, 0xabb6, 0x095d, 0xc40e, 0x4d16, 0xc985, 0x1be2, 0x591c, 0x8718, 0x6af1, 0x5825,
    0xaf2a, 0xd1ed, 0xfb69, 0xd4d5, 0x9676, 0x152f, 0x7ab3, 0x1adc, 0x7629, 0x4c32, 0xfcaa, 0x6027, 0x24bd, 0xf8e7, 0x6946, 0xdc8f,
    0x4474, 0x32b4, 0x976f, 0x1d3d, 0xe0f9, 0xffbb, 0x422b, 0x0bd1, 0x6a94, 0x3d40, 0x9cf2, 0x3be5, 0x5f6d, 0x9053, 0x5630, 0x545d,
    0x1b26, 0x9dd8, 0x00c4, 0xc4c4, 0x87dc, 0xae35, 0xdff9, 0x011f, 0x0e14, 0xfa76, 0xdac1, 0x6c00, 0xcfee, 0x16b3, 0xd532, 0x609a,
    0x9900, 0x9c30, 0xf927, 0xb88d, 0x01c0, 0xd1cb, 0xdd4f, 0x95bf, 0xeffb, 0x02d0, 0xf2c6, 0xe229, 0x0d7d, 0xa002, 0x06ac, 0xca96,
    0x3bec, 0x5664, 0x0009, 0x0909, 0x905a, 0x5f39, 0xc407, 0x441f, 0x59df, 0x44db, 0x9d1b, 0xc307, 0x332e, 0x1cfe, 0x3231, 0x12ea,
    0xc847, 0xc82b, 0xa447, 0x07c5, 0xb2f4, 0xd2f7, 0xd26e, 0x4bf7, 0x4e5e, 0xb2d0, 0xf6d3, 0xb310, 0x2718, 0x6e5f, 0xb2a7, 0x81a4,
    0xb077, 0x7362, 0x525e, 0x7e1f, 0xf25c, 0x78b3, 0x38ca, 0x435f, 0x6eae, 0x4356, 0x67a7, 0xd30c, 0x389e, 0x170b, 0x7c81, 0x4ed4,
    0x385a, 0xd3cf, 0xfb5d, 0xe0e1, 0xe7a3, 0xd2d0, 0xf549, 0x1a97, 0x3d62, 0xbed0, 0x3aa7, 0x0c24, 0xe850, 0xde4a, 0xa3a7, 0x9014,
    0x1177, 0x66c7, 0xa267, 0x41df, 0xcc38, 0xf378, 0x4d9c, 0x430f, 0x3efe, 0x1151, 0x40e1, 0xe30d, 0x3852, 0xdbc7, 0x7b0d, 0xb569,
    0x385b, 0xd2ce, 0xeb57, 0xea50, 0xfc5c, 0x96d1, 0xb288, 0xae8b, 0x6147, 0x55d6, 0x81a6, 0xb275, 0x5376, 0x473c, 0x49e1, 0x7a5e,
    0xf731, 0x40f9, 0xfb15, 0xa8a9, 0x255f, 0x0b0e, 0xb54b, 0x1a79, 0xd38c, 0xb81e, 0x9253, 0x7426, 0x612b, 0x39ba, 0x2224, 0x0744,
    0x3375, 0x47a5, 0xd078, 0x7ff7, 0x0bbf, 0x04fa, 0xbed6, 0x3ca1, 0x6c18, 0xd7f6, 0x8648, 0x2baa, 0x1099, 0x9922, 0xbe12, 0xf865,
    0xebc4, 0x79c3, 0x59b1, 0x2ab5, 0x1e8d, 0x6354, 0x64d3, 0x9465, 0x242a, 0x6f70, 0x8c83, 0x4a2f, 0x878d, 0xff64, 0x9df4, 0x2ce8,
    0x25ea, 0xbebb, 0x51cc, 0xdf90, 0x6876, 0xfdb4, 0x6f32, 0xcec1, 0x2897, 0x1eb9, 0x5760, 0x1506, 0x539a, 0xabd0, 0x6f3b, 0xc7c8,
    0xb8cd, 0x4180, 0x9367, 0x5119, 0x0a45, 0xef0b, 0xf220, 0x04cf, 0x8be3, 0x5d7e, 0xa156, 0x43f3, 0xc202, 0x2720, 0x5667, 0x030a,
    0x3917, 0x8f89, 0x7338, 0x0804, 0x8c5c, 0x95f0, 0xa0b4, 0xb01a, 0x1e0f, 0xe1d6, 0xc19f, 0x89a0, 0x3c2b, 0xe692, 0xf2ea, 0xce05,
    0xec53, 0x9965, 0xf955, 0xcaff, 0x5285, 0xa5c4, 0x954d, 0x1d09, 0xd4cd, 0x8e6e, 0x85d4, 0x842b, 0x6adf, 0x760b, 0x6e10, 0xfde8,
    0x336e, 0x5cbe, 0x709d, 0x9ebc, 0x57bd, 0xc8db, 0x54b7, 0xf1cc, 0xdb3e, 0x82f4, 0xd33a, 0x0ea8, 0x46ca, 0xae1c, 0xf6d0, 0xb013,
    0x1706, 0x718c, 0x9ea6, 0x4da7, 0x7834, 0xbf4d, 0xb631, 0x531e, 0x2f54, 0xaa4b, 0xe5ab, 0xf8ce, 0x406f, 0x6d83, 0x5d66, 0xb94e,
    0xd308, 0x3c9a, 0x5723, 0x5645, 0x2128, 0x3855, 0xdcc0, 0x0b3b, 0x807e, 0x7ba6, 0x1ec2, 0x2c1b, 0xd619, 0x78ac, 0x27d5, 0xa392,
    0xa521, 0x70a8, 0xab89, 0x3662, 0x0595, 0xc0b2, 0xb586, 0xd7b4, 0xc40a, 0x4912, 0x89ad, 0x3126, 0x36e0, 0x8717, 0x65fe, 0xa843,
    0xcfb5, 0x4de8, 0x377b, 0x0d87, 0x5af8, 0x50e1, 0xe3b6, 0x83e9, 0xdf2c, 0xd4ca, 0x8969, 0xf5e2, 0xb13c, 0x2922, 0xba07, 0xa95c,
    0xc1a1, 0xb79e, 0xedba, 0x6187, 0x9516, 0x4652, 0x3684, 0xe373, 0x462c, 0x48fa, 0x704e, 0x4d6f, 0xb0fc, 0xf8e9, 0x6748, 0x3ce3,
    0x2e5a, 0xb54e, 0x1f7c, 0x83ae, 0x986b, 0xe650, 0x3028, 0x29e5, 0x7dc0, 0x1e9e, 0x7047, 0x4466, 0x20a6, 0xa7d0, 0xa34f, 0x78fc,
    0x7785, 0xf195, 0x8267, 0x40a9, 0xab45, 0xfaae, 0x0219, 0x3b0f, 0xb587, 0xd6b5, 0xd400, 0x43a3, 0x9252, 0x7527, 0x7121, 0x330b,
    0x39db, 0x4345, 0x74b4, 0xf3b9, 0x8c5d, 0x94f1, 0xb0be, 0xbaab, 0x05f0, 0xa5d7, 0x865e, 0x3dbc, 0x600e, 0x0d94, 0x49eb, 0x7054,
    0x5775, 0x0013, 0x1313, 0x20b5, 0xb4c3, 0x83fa, 0xcc3f, 0xf47f, 0x3daa, 0x7618, 0x7d03, 0xdd5d, 0x87ad, 0xdf44, 0xbca2, 0x6ac3,
    0x6a17, 0xbec3, 0x29b4, 0x2c91, 0x5c93, 0x5db0, 0x6f98, 0x646b, 0x2cdd, 0x10df, 0xdf64, 0x9c82, 0x4b95, 0x2c3c, 0xf13e, 0x29cc,
    0x54e9, 0xaf92, 0x6955, 0xcf9c, 0x64c1, 0x8677, 0x1495, 0xd102, 0x1486, 0xc211, 0x3433, 0x76d2, 0xb7c9, 0xbaed, 0x43b6, 0x8747,
    0x35ae, 0xfa44, 0xe8f3, 0x7de9, 0x37b7, 0xc14b, 0x5d74, 0xab5c, 0xe3b7, 0x82e8, 0xcf26, 0xde7b, 0x9296, 0xb1e3, 0xf6fd, 0x9d3e,
    0xe622, 0x425a, 0x7aa0, 0x09cf, 0x569c, 0xf8f1, 0x7f50, 0xac18, 0xd0c2, 0xc54d, 0x1f5e, 0xa18c, 0x9929, 0xb519, 0x482b, 0xa19f,
    0x8a3a, 0x95ac, 0xfce8, 0x2265, 0x4605, 0x61d3, 0xc142, 0x547d, 0x3b06, 0xbc8e, 0x46ef, 0x8b39, 0x87a4, 0xd64d, 0x2cf8, 0x35fa,
    0xae10, 0xfadc, 0x706b, 0x684a, 0xc188, 0x9eb7, 0x5cb6, 0x7895, 0x1eec, 0x0235, 0x1723, 0x54a9, 0xefd2, 0x2bf9, 0x43ca, 0xfb3b,
    0x8687, 0xe465, 0x270b, 0x7d4c, 0x9212, 0x3567, 0x338d, 0xbf5d, 0xa621, 0x43b5, 0x8444, 0x05b0, 0xe597, 0xc4f2, 0xb1ea, 0xfff4,
    0x0d64, 0xb91b, 0x865d, 0x3ebf, 0x5010, 0x1247, 0x65ea, 0xbc57, 0x9f36, 0xcc3c, 0xf77c, 0x0db4, 0x69cb, 0x5102, 0x115e, 0x4fee,
    0x136b, 0x58cd, 0x47c2, 0xb71f, 0x6c3b, 0xf4d5, 0x9700, 0x7252, 0x7365, 0x5559, 0x0e29, 0xc74b, 0x3b4e, 0xf4c6, 0x8413, 0x52e7,
    0xc7a6, 0xd6a3, 0xc216, 0x3334, 0x06e4, 0x82de, 0xf910, 0x8fba, 0x400b, 0x09e7, 0x7eb4, 0x59f7, 0x6cf3, 0x3c1d, 0xd0a4, 0xa32b,
    0x1c98, 0x5457, 0x112c, 0x3d9c, 0x402e, 0x2cc2, 0x0fc0, 0x3fa9, 0x570d, 0x786b, 0xe012, 0x1450, 0x14c7, 0x8350, 0x6695, 0xf035,
    0x33cc, 0xfe1c, 0xf487, 0xc552, 0x0041, 0x4141, 0x52a6, 0x86e7, 0x8405, 0x44f1, 0xb731, 0x4215, 0x35ef, 0xbb05, 0xba55, 0xfb0e,
    0xb3b2, 0x85ba, 0xea45, 0xe949, 0xd658, 0x39ed, 0x7573, 0x2575, 0x2124, 0x3459, 0x1cb8, 0x7477, 0x307a, 0x7bb7, 0x0fd3, 0x2cba,
    0x77b8, 0xcca8, 0x63e8, 0xd86f, 0xe0b8, 0xbefa, 0x108d, 0x8d36, 0xee91, 0x79b1, 0x2bc3, 0x79f0, 0x6a82, 0x2b56, 0xec65, 0xaf53,
    0xa894, 0x1862, 0xea81, 0x2d8d, 0x5184, 0x97d8, 0xaa8a, 0x246a, 0x2f30, 0xce2f, 0xc679, 0x1877, 0xff94, 0x6d04, 0xdae1, 0x4c20,
    0xeeb8, 0x5098, 0x9acf, 0x60e2, 0xe178, 0x6f31, 0xcdc2, 0x1889, 0x016a, 0x7b61, 0xd905, 0x9bd9, 0x67ff, 0x8b54, 0xeac9, 0x65c5,
    0x9378, 0x4e06, 0xea88, 0x2484, 0xc1de, 0xc8e1, 0x6e8d, 0x6075, 0x76ef, 0x8af4, 0x5b62, 0xdb70, 0xccba, 0x71fa, 0xe8d0, 0x5eca,
    0x26ff, 0x98b3, 0x3e88, 0x6727, 0x538c, 0xbdc6, 0x1fac, 0x537e, 0x4f34, 0xc9b1, 0x2fd6, 0x28c9, 0x40e7, 0xe50b, 0x586e, 0xe461,
    0x230f, 0x3d64, 0xb8d6, 0x5a9b, 0x3382, 0xb052, 0x5647, 0x232a, 0x1841, 0xc9a2, 0x3cc5, 0x087c, 0xf424, 0x66f1, 0x9451, 0x101e,
    0x1ea5, 0x4b7c, 0xc5d5, 0x87c6, 0xb42f, 0x6f16, 0xeae5, 0x49e9, 0x7256, 0x7761, 0x1571, 0x24ed, 0xa8b7, 0x3b41, 0xfbc9, 0x7475,
    0x3278, 0x5ba3, 0x1ab1, 0x1b44, 0xffba, 0x432a, 0x1bdb, 0x6025, 0x26bf, 0xd8f3, 0x7c24, 0xeb71, 0xcc76, 0xbd36, 0xef5c, 0xa577,
    0x26fe, 0x99b2, 0x2e82, 0x6d96, 0x4873, 0xf9c7, 0x586d, 0xe762, 0x1311, 0x22b7, 0x94d7, 0x9698, 0xfbc1, 0x7c7d, 0xb228, 0x0e2b,
    0xc549, 0x1b5a, 0xe1a4, 0xb3ed, 0xdae5, 0x4824, 0xae90, 0x7a5c, 0xf533, 0x60ed, 0xee77, 0x9f57, 0xad5d, 0x848c, 0xcd78, 0xa233,
    0x158b, 0xde17, 0xfefa, 0x1261, 0x43cc, 0xfd3d, 0xe6bb, 0xdbc3, 0x7f09, 0xf541, 0x129f, 0xbd32, 0xeb58, 0xe55f, 0x0c3a, 0xf64e,
    0x2e8d, 0x6299, 0xb815, 0x9958, 0xc468, 0x2b70, 0xca43, 0xee39, 0xd119, 0x0f9d, 0x62f4, 0xd578, 0x2ad0, 0x7be8, 0x508c, 0x8edb,
    0x3061, 0x60ac, 0xaf36, 0xcdf1, 0x2bba, 0x0089, 0x8989, 0x1502, 0x579e, 0xebf8, 0x45ff, 0xa834, 0xb8c2, 0x4e8f, 0x6301, 0x3186,
    0x9640, 0x2319, 0x2b72, 0xc841, 0xce2d, 0xc47b, 0x3863, 0xeaf6, 0x5afa, 0x52e3, 0xc3a2, 0x968b, 0xe8d2, 0x5cc8, 0x06eb, 0x8dd1,
    0x0976, 0xef25, 0xdc0e, 0xc5f5, 0xa7e6, 0x9579, 0x293d, 0xa518, 0x4991, 0x0a2e, 0x8460, 0x2194, 0x84e9, 0xa81d, 0x91eb, 0xff83,
    0x7a13, 0xba7c, 0xd227, 0x02be, 0x9ca8, 0x61bf, 0xad2e, 0xf7ff, 0x8e37, 0xdc8d, 0x4676, 0x12a0, 0x820d, 0x2ac3, 0x68fb, 0x7039,
    0x3a18, 0xb39b, 0xac93, 0x5b49, 0xf05b, 0x5da2, 0x7d8a, 0x54d4, 0x92af, 0x88da, 0x575a, 0x2f3c, 0xc223, 0x0601, 0x673b, 0x4f90,
    0x6d15, 0xcbf0, 0x4c81, 0x4f19, 0xe49c, 0xdef2, 0x1b1f, 0xa4e1, 0xa163, 0x76c6, 0xa3dd, 0xea6e, 0xc262, 0x4740, 0x359d, 0xc977,
    0xe910, 0x8f01, 0xfbb0, 0x0d0c, 0xd173, 0x65f7, 0xa14a, 0x5fef, 0x12d1, 0xf37c, 0x4998, 0x0327, 0x143a, 0x7ead, 0x40ee, 0xec02,
    0xc834, 0xbb58, 0xe708, 0x797b, 0xe109, 0x1e40, 0xae99, 0x7355, 0x6569, 0x3fd4, 0x2a70, 0xdb48, 0xf482, 0xc057, 0x5063, 0x6134,
    0x26a5, 0xc2e9, 0xcccb, 0x008b, 0x8b8b, 0x3516, 0x42fc, 0xdc06, 0xcdfd, 0x27b6, 0xc0f1, 0xf6c5, 0xa506, 0x578f, 0xfae9, 0x455e,
    0x0995, 0x0cc6, 0x0ab2, 0x18fc, 0x741f, 0x5812, 0x981d, 0x9026, 0x2345, 0x772e, 0x5a3e, 0x9627, 0x447e, 0x38be, 0x372b, 0x5dd7,
    0x08ff, 0x77a7, 0xd3b7, 0x8325, 0x13e0, 0xd346, 0x72d4, 0xf5e3, 0xb03d, 0x3928, 0xb0b6, 0xb2a3, 0x85a0, 0xf05f, 0x59a6, 0x3da2,
    0x7e10, 0xfd53, 0x88d5, 0x5855, 0xdf5a, 0xa2bc, 0x9a04, 0xab29, 0x96c2, 0xa19b, 0x8e3e, 0xd584, 0xd62c, 0x4d99, 0x460a, 0x6edc,
    0x3124, 0x34e2, 0xa703, 0x709c, 0x9fbd, 0x47b7, 0xc26a, 0x4f48, 0xb5cd, 0x9cff, 0x36e8, 0x8f1f, 0xe5ae, 0xfdcb, 0x104d, 0x4df6,
    0x2965, 0xfd40, 0x9bc6, 0x78e0, 0x6b99, 0x2146, 0x563b, 0x5f56, 0xab68, 0xd783, 0xf33d, 0x08d9, 0x5181, 0x92dd, 0xfaa8, 0x041f,
    0x5b33, 0x8a21, 0x8eb7, 0x5c0d, 0xc32e, 0x1a07, 0xadf2, 0x2b23, 0x9910, 0x8c20, 0xe98c, 0x139d, 0xae3b, 0xd1f7, 0xe173, 0x643a,
    0x7d8c, 0x52d2, 0xf293, 0xb77c, 0x0f58, 0xa731, 0x42ae, 0x8e54, 0xbfee, 0x1592, 0xc70e, 0x7e0b, 0xe648, 0x2830, 0xb91e, 0x8358,
    0x6e9d, 0x7065, 0x6644, 0x21e4, 0xf499, 0xdb4c, 0xf086, 0x807f, 0x7aa7, 0x0ec8, 0x26aa, 0xcde6, 0x3cad, 0x6014, 0x178e, 0xf904,
    0x9bae, 0x1088, 0x8833, 0xbeb3, 0x59c4, 0x5fc0, 0x3dfe, 0x224c, 0x6f2c, 0xd0df, 0xd850, 0xdf87, 0x7f61, 0x9d29, 0xf135, 0x22c7,
    0xe4a7, 0xe5c9, 0x9aac, 0x0381, 0xb29c, 0xba9f, 0x31c4, 0xd402, 0x41a1, 0xb246, 0x6045, 0x46df, 0xbb09, 0xb659, 0x3b76, 0xccfe,
    0x35be, 0xea54, 0xf858, 0xd6f9, 0x984c, 0xc177, 0x6148, 0x5ad9, 0x71c0, 0xd2ea, 0xcf73, 0x8b2e, 0x90b3, 0xb6d0, 0xb2ff, 0xd9fc,
    0x6220, 0x01ac, 0xbda7, 0x7ecd, 0x208e, 0x8ff8, 0x0249, 0x6b5f, 0xe780, 0xf1f3, 0xe401, 0x436f, 0x5e9e, 0x72ab, 0x8a9c, 0x330a,
    0x38da, 0x534f, 0x7e05, 0xe846, 0xc85c, 0xd330, 0x04a2, 0xe68e, 0xeef6, 0x1ed6, 0x380f, 0x869a, 0xf978, 0xe7d2, 0xa3a1, 0x9612,
    0x714b, 0x5961, 0xfa65, 0xc9d2, 0x4cb5, 0x7b2d, 0x9549, 0x190d, 0x94e5, 0xa4aa, 0xea28, 0x8424, 0x65d0, 0x866d, 0x0e8f, 0x61ed,
    0xff7c, 0x85ec, 0xbc13, 0xdb72, 0xceb8, 0x51ee, 0xfdb2, 0x6934, 0xaefd, 0x1731, 0x46bb, 0xdf6d, 0x958b, 0xdbcf, 0x7305, 0x3539,
    0x6dd3, 0x0d36, 0xeb49, 0xf44e, 0x0c9b, 0x57ef, 0x9a89, 0x26a4, 0xc3e8, 0xdcc1, 0x0a3a, 0x9074, 0x7117, 0x053d, 0x681a, 0x91d8,
    0xccb0, 0x7bf0, 0x4894, 0x1e20, 0xcef9, 0x10af, 0xaf14, 0xefd3, 0x2af8, 0x53c0, 0xf18a, 0x9d78, 0xa064, 0x60ca, 0xc950, 0xce37,
    0xde61, 0x888c, 0x010c, 0x1d07, 0xdac3, 0x6e02, 0xeffa, 0x03d1, 0xe2cc, 0xe898, 0x1682, 0xe403, 0x416d, 0x7e8a, 0x67c9, 0xbd62,
    0xbb08, 0xb758, 0x2b7c, 0xc64f, 0x2e41, 0xae55, 0xbf99, 0x62e5, 0xc469, 0x2a71, 0xda49, 0xe488, 0xcae6, 0x4b9c, 0x2535, 0x6164,
    0x76f5, 0x90ee, 0xeb8d, 0x308a, 0x8b47, 0xf9da, 0x4570, 0x27bb, 0xcdfc, 0x26b7, 0xd0fb, 0xfc74, 0xbef9, 0x138e, 0xbd28, 0xf142,
    0x55b0, 0xe7c0, 0xb1b3, 0xa6ad, 0xcf39, 0xc164, 0x725b, 0x7a6c, 0xc503, 0x5110, 0x034c, 0x7f51, 0xad19, 0xc0c8, 0xcffc, 0x04a1,
    0xe58d, 0xdee8, 0x0105, 0x140e, 0x4a99, 0x313b, 0x2bfd, 0x47ce, 0xbb13, 0xac43, 0x8b99, 0x2704, 0x7243, 0x6274, 0x55f8, 0xaf88,
    0x734f, 0x7f73, 0x8f3b, 0xc18a, 0x9cb5, 0x7ca2, 0x6df7, 0x2912, 0x8a37, 0x98a1, 0x2c9a, 0x5798, 0xedfe, 0x25c3, 0x9792, 0xe0c0,
    0xc682, 0xe38c, 0xb9d3, 0x4e95, 0x791b, 0x8169, 0x7dba, 0x64e4, 0xa352, 0x65e1, 0xb75c, 0x2f78, 0x8667, 0x0485, 0xc1a9, 0xbf96,
    0x6dea, 0x340f, 0x4aee, 0x464c, 0x289a, 0x13b4, 0x8712, 0x60fb, 0xf861, 0xefc0, 0x39eb, 0x7375, 0x4549, 0x1e82, 0x6c5b, 0x94b5,
    0xf4fa, 0xb82f, 0xa362, 0x55d1, 0x86a1, 0xc243, 0x6661, 0x04c1, 0x85ed, 0xbd12, 0xcb78, 0xc409, 0x4a11, 0xb9b3, 0x2ef5, 0x1ae1,
    0x4b14, 0xadbd, 0x646c, 0x2bda, 0x60e9, 0xea73, 0xdf7f, 0x8799, 0xeb70, 0xcd77, 0xad3c, 0xe5ed, 0xbe88, 0x62ff, 0xde73, 0x9a9e,
    0x31b3, 0xa375, 0x42c6, 0xe63c, 0x5c44, 0x8a67, 0xc8f1, 0x7e9d, 0x70de, 0xddff, 0x250f, 0x5b5e, 0xe74c, 0x3d3f, 0xe38d, 0xb8d2,
    0x5e9f, 0x73aa, 0x9a96, 0x39bb, 0x2325, 0x174e, 0x39c4, 0x5c5a, 0x9479, 0x3836, 0xbfa3, 0x58df, 0x55d0, 0x87a0, 0xd249, 0x6cd0,
    0x1f3e, 0xc1ec, 0xfad3, 0x7f64, 0x982c, 0xa117, 0x02b2, 0x90a4, 0xa1c7, 0xd262, 0x47fb, 0x8e26, 0xcd9c, 0x46d7, 0xb301, 0x3609,
    0x6efe, 0x1306, 0x35a0, 0xf44a, 0x089f, 0x17c7, 0xb04d, 0x4958, 0xc3e7, 0xd3ce, 0xfa5c, 0xf0eb, 0xed12, 0xc92f, 0xb148, 0x5d56,
    0x897e, 0xe2f5, 0xd1a1, 0xb725, 0x5601, 0x656c, 0x3ad1, 0x7a52, 0xfb3d, 0x8081, 0x8459, 0x18ad, 0x254e, 0x1a1f, 0xb5ea, 0xbbd8,
    0x6788, 0xfc23, 0xe9ae, 0x31bf, 0xaf79, 0x82be, 0x9970, 0xec40, 0x8a76, 0xd9e0, 0x7e3c, 0xd17f, 0x69fb, 0x6132, 0x20a3, 0xa2d5,
    0xf36d, 0x5889, 0x0386, 0xb59b, 0xcaa9, 0x04d3, 0x97ff, 0x8dad, 0x750a, 0x5c0c, 0xc22f, 0x0a0d, 0xa743, 0x30dc, 0xdd11, 0xcbe1,
    0x5d90, 0x4fb8, 0x453d, 0x6af6, 0x5f22, 0xdf1c, 0xe4fa, 0xb894, 0x18d9, 0x513a, 0x2966, 0xfe43, 0xabd8, 0x6733, 0x4798, 0xed45,
    0x9e78, 0x9379, 0x4f07, 0xfa82, 0x2e35, 0xda21, 0x8ce0, 0x294c, 0xd469, 0x2aca, 0x61f2, 0xe063, 0x6521, 0x779c, 0xe88c, 0x0296,
    0xb480, 0xc0b9, 0xbe8d, 0x67fa, 0x8e51, 0xbaeb, 0x45b0, 0xe77b, 0x0a08, 0xa246, 0x60fe, 0xfd64, 0xbfe2, 0x199e, 0x0776, 0x0147,
    0x564c, 0x2821, 0xa80f, 0x83f9, 0xcf3c, 0xc461, 0x2279, 0x5a19, 0xb100, 0x151e, 0x4b82, 0x3b2b, 0x91a3, 0xb7cb, 0xb8ef, 0x63a2,
    0x9225, 0x0250, 0x7246, 0x6771, 0x05da, 0x8ffd, 0x074c, 0x3b7d, 0xc7f5, 0x85f0, 0xa00f, 0x0ba1, 0x1ae4, 0x4e11, 0xfd9f, 0x4419,
    0x5fd9, 0x24e7, 0xa2bd, 0x9b05, 0xbb23, 0x9c73, 0xba64, 0xca3f, 0x9245, 0x6230, 0x11bc, 0xad0c, 0xd5dd, 0x8f75, 0x8fc4, 0x3e75,
    0x9ada, 0x75f7, 0xa1f1, 0xe454, 0x163a, 0x5cbb, 0x7598, 0xce9e, 0x77c8, 0xbcd8, 0x10b9, 0xb902, 0x9f44, 0xbe4e, 0xa439, 0x79bb,
    0x21c9, 0xd9b4, 0x2a68, 0xc350, 0x6479, 0x3ecf, 0x2060, 0x6116, 0x0487, 0xc3ab, 0x9f82, 0x7888, 0x03f1, 0xc2ec, 0xc9ce, 0x50a9,
    0xabfe, 0x4115, 0x06f2, 0x94c8, 0x8987, 0x1b0c, 0xb7f2, 0x81d6, 0xc205, 0x2027, 0x2651, 0x361d, 0x7aea, 0x4385, 0xb474, 0x344d,
    0x08ac, 0x24f4, 0xb1ae, 0xbbb0, 0x0fe0, 0x1f89, 0x765b, 0x3e40, 0xafef, 0x1428, 0x6cbf, 0x7051, 0x5270, 0x5031, 0x3366, 0x54b6,
    0xf0cd, 0xcb34, 0x8845, 0xc8c5, 0x4aa9, 0x010b, 0x1a00, 0xaaf5, 0x5b15, 0xac07, 0xcfdd, 0x2580, 0xd4d1, 0x9272, 0x5507, 0x5077,
    0x7520, 0x7626, 0x433d, 0x0ccc, 0x00b8, 0xb8b8, 0x34f5, 0xb014, 0x1001, 0x01ba, 0xabb1, 0x0e5a, 0xb438, 0x7801, 0x8a78, 0xd7ee,
    0x9e50, 0xbb51, 0xee01, 0xe921, 0xbe30, 0xda47, 0xea86, 0x2a8a, 0x21b2, 0xa2cf, 0xe977, 0xe866, 0xe87c, 0xf266, 0x4289, 0xa973,
    0xee8e, 0x66ae, 0xcb0e, 0xb27f, 0x597c, 0xe778, 0x090b, 0x9258, 0x7f2d, 0xd165, 0x73e1, 0xd1dd, 0xcb59, 0xe528, 0x7b4d, 0xf529,
    0x7af7, 0x5e98, 0x74ad, 0xeaa0, 0x0cac, 0x60d8, 0xdb42, 0xfe88, 0x6013, 0x1089, 0x8932, 0xaeb9, 0x5375, 0x443f, 0x79ff, 0x658d,
    0xdb30, 0x8cfa, 0x3356, 0x6486, 0xc130, 0x260f, 0x6843, 0xc881, 0x0eed, 0x038f, 0xbc92, 0x5af3, 0x5bea, 0x53f8, 0xc9b2, 0x2cd5,
    0x18d7, 0x5f34, 0xc90a, 0x946d, 0x2c22, 0xef20, 0xd90b, 0x95d7, 0x8793, 0xe17a, 0x6d33, 0xedd6, 0x0deb, 0x3694, 0xf363, 0x5687,
    0xe3ea, 0xdfb5, 0x4d53, 0x8cc0, 0x096c, 0xf53f, 0x6ce1, 0x2e0f, 0xe01b, 0x1d59, 0x849d, 0xdc69, 0xa292, 0xb42a, 0x6a13, 0xbac7,
    0x699c, 0x0655, 0x336f, 0x5dbf, 0x6097, 0x940d, 0x4c42, 0x8cda, 0x1376, 0x45d0, 0x871b, 0x69f2, 0x683b, 0xb0f9, 0xfdec, 0x376a,
    0x1c96, 0x5a59, 0xf140, 0x57b2, 0xc7d4, 0xa4d1, 0x9153, 0x473b, 0x4ee6, 0x0a68, 0xc226, 0x0304, 0x3719, 0x6fe5, 0x1916, 0x8ffe,
    0x044f, 0x0b63, 0xd826, 0xa9f1, 0x6c0c, 0xc3e2, 0xd6cb, 0xaa7e, 0xd09e, 0x9911, 0x8d21, 0xf986, 0x192c, 0xb5c4, 0x95f6, 0xa6b2,
    0xd026, 0x21a9, 0xb9d4, 0x4992, 0x092d, 0xb47e, 0x3e47, 0xa8e8, 0x641e, 0x59a8, 0x33ac, 0x9e7c, 0x977d, 0x0f2f, 0xd046, 0x41c9,
    0xda2e, 0x83ef, 0xd92a, 0xb4f6, 0xb6cf, 0xade0, 0x3931, 0xa9af, 0x3252, 0x7189, 0x9ba3, 0x1d85, 0x5841, 0xcb4e, 0xf23f, 0x1bd0,
    0x6b2e, 0x96f1, 0x92a8, 0x8fdd, 0x276c, 0x1a2b, 0x81de, 0xca0d, 0xa077, 0x73d9, 0xe9e5, 0x7af4, 0x5d9b, 0x44b3, 0xf573, 0x20ad,
    0xacdb, 0x1301, 0x32a7, 0x847c, 0x3d88, 0x543a, 0x7c41, 0x8e14, 0xffae, 0x573e, 0x4b58, 0xe1f1, 0xe6b8, 0xd8c0, 0x4f17, 0xea92,
    0x3e9e, 0x7131, 0x231b, 0x2970, 0xe855, 0xdb4f, 0xf385, 0xb061, 0x6574, 0x22c9, 0xeaa9, 0x05a5, 0xf082, 0x847b, 0x3a8f, 0x240c,
    0x4956, 0xcde9, 0x33a2, 0x9072, 0x7711, 0x6501, 0x57bc, 0xc9da, 0x44bd, 0xfb7d, 0xc0c1, 0xc6f5, 0x94fb, 0xbab4, 0x1aef, 0x451a,
    0x4dd1, 0x0e42, 0xac20, 0xe8fa, 0x74e0, 0xa7ed, 0x9e72, 0x9973, 0xef43, 0xba68, 0xc633, 0x523d, 0x1d7c, 0xa1b8, 0xad1d, 0xc4cc,
    0x8fd4, 0x2e65, 0x8a71, 0xdee7, 0x0e0a, 0xe468, 0x2a06, 0xad3e, 0xe7ef, 0x9e9c, 0x779d, 0xe98d, 0x129c, 0xbe31, 0xdb46, 0xfa8c,
    0x203b, 0x3a4d, 0xe6ce, 0xaeb6, 0x5c7a, 0xb459, 0x1960, 0xf988, 0x1722, 0x55a8, 0xffd8, 0x2148, 0x5835, 0xbf3a, 0xc146, 0x5079,
    0x7b2e, 0x964a, 0x2913, 0x8b36, 0x88ab, 0x262b, 0x4c67, 0xa9ff, 0x6202, 0x238e, 0xbce5, 0x2d84, 0x588d, 0x0782, 0xf5b3, 0xe06d,
    0x6b2f, 0x97f0, 0x82a2, 0x856c, 0x3c93, 0x5e2a, 0xc61f, 0x7e11, 0xfc52, 0x98df, 0x52e4, 0xc4a5, 0xe6bd, 0xddc5, 0x1f35, 0xcae7,
    0x4a9d, 0x353f, 0x6bd5, 0x6d0a, 0xd4ef, 0xac4c, 0x8496, 0xd762, 0x12dc, 0xfe71, 0x99ea, 0x76da, 0xbfc1, 0x3abd, 0x163e, 0x58bf,
    0x35b0, 0xe45a, 0x1834, 0xbcd7, 0x1fb6, 0x4964, 0xffdb, 0x224b, 0x682b, 0xa0e9, 0xed47, 0x9c7a, 0xb36d, 0x5a65, 0xcd7c, 0xa637,
    0x55a3, 0xf4d3, 0x9106, 0x126e, 0x4cc3, 0x0d5b, 0x8624, 0x47c6, 0xb31b, 0x2c13, 0xde11, 0xf8fc, 0x725d, 0x7c6a, 0xa53f, 0x6eb6,
    0x5b4e, 0xf75c, 0x2d94, 0x489d, 0x1729, 0x5ea3, 0x4f96, 0x6b13, 0xabcc, 0x7327, 0x171b, 0x6c91, 0x5e7f, 0x934a, 0x7c34, 0xfb61,
    0xdcdd, 0x1626, 0x40a7, 0xa54b, 0x1ac2, 0x6837, 0xbcf5, 0x3d94, 0x4826, 0xac92, 0x5a48, 0xe051, 0x5713, 0x6675, 0x10d5, 0xd56e,
    0x3cc6, 0x0b7f, 0xc43a, 0x7922, 0xb850, 0xdc1d, 0xd6e6, 0x8753, 0x21ba, 0xaac7, 0x6927, 0xbdee, 0x3784, 0xf278, 0x5c97, 0x59b4,
    0x2fb0, 0x4eaf, 0x4321, 0x10d0, 0xd06b, 0x6ce4, 0x2b0a, 0xb039, 0x3d2c, 0xf09e, 0x9867, 0xea5c, 0xf050, 0x56a9, 0xcdc4, 0x1e8f,
    0x6156, 0x44c7, 0x8107, 0x13d4, 0xe772, 0x0301, 0x321c, 0x3fc7, 0x3963, 0xfbfd, 0x4041, 0x43ad, 0x9c5c, 0x954b, 0x1b0f, 0xb4f1,
    0xb1c8, 0xddd6, 0x0c26, 0xea52, 0xfe5e, 0xb6c5, 0xa7ea, 0x9975, 0xe945, 0xda54, 0xf995, 0x0a3f, 0x9571, 0x2135, 0x2548, 0x1c19,
    0xd5d6, 0x847e, 0x3f8a, 0x742e, 0x6923, 0xb9ea, 0x77ac, 0xd8bc, 0x336b, 0x59bb, 0x20bf, 0xbec9, 0x23be, 0x8cd5, 0x1c79, 0xb5b6,
    0xe784, 0xf5f7, 0xa429, 0x69ab, 0x3162, 0x72a4, 0x8593, 0xc36c, 0x5845, 0xcf4a, 0xb217, 0x3114, 0x04d2, 0x96fe, 0x9da7, 0x7fbb,
    0x47f3, 0x862e, 0x4dcc, 0x135f, 0x6cf9, 0x3617, 0x70e0, 0xe3c1, 0xf49e, 0xdc4b, 0x80b0, 0xb568, 0x395a, 0xc2c4, 0xe1e6, 0xf1af,
    0xb85d, 0xd110, 0x0694, 0xf2ae, 0x8a41, 0xeed7, 0x3ff7, 0x0953, 0xca00, 0xad7a, 0xa3ab, 0x9c18, 0xd10f, 0x198b, 0x1263, 0x41ce,
    0xdd29, 0xf3d9, 0xec3d, 0xf70b, 0x7ac3, 0x6aac, 0x0578, 0x2d5f, 0x8356, 0x6093, 0x9009, 0x0c6a, 0xa61e, 0x7c8a, 0x45df, 0x8814,
    0x9994, 0x08a4, 0x2cfc, 0x31fe, 0xee38, 0xd018, 0x1f97, 0x6845, 0xce87, 0x6ed1, 0x3c29, 0xe490, 0xd2fe, 0xdb67, 0xdbad, 0x1167,
    0x76d7, 0xb2cc, 0xeacf, 0x63c3, 0xf344, 0x71a0, 0xb28a, 0xac89, 0x4153, 0x40b4, 0xb658, 0x3a77, 0xdcf4, 0x3f0f, 0xf1ab, 0xbc59,
    0x9138, 0x2c50, 0x9d52, 0x8a4e, 0xe1d8, 0xcf91, 0x69cc, 0x5605, 0x6168, 0x7af9, 0x5096, 0x94c1, 0x808e, 0x8b56, 0xe8cb, 0x45d1,
    0x861a, 0x79f8, 0x628a, 0xab06, 0xb9ed, 0x70ab, 0xa88a, 0x067c, 0x1a46, 0xecb3, 0x7985, 0x1ff7, 0x0825, 0xad7d, 0xa4ac, 0xec2e,
    0xe418, 0x5a76, 0xde6f, 0x8682, 0xe160, 0x7729, 0x5d39, 0xe611, 0x7169, 0x7b43, 0xfb27, 0x9a9b, 0x34b6, 0xf357, 0x62b3, 0x923f,
    0x184a, 0xc2a9, 0x8c8b, 0x4227, 0x07dd, 0xaaec, 0x420c, 0x2cf6, 0x3bf4, 0x4e7c, 0x90f2, 0xf791, 0xe059, 0x5f1b, 0xe625, 0x455d,
    0x0a96, 0x3cd8, 0x1561, 0x34fd, 0xb81c, 0x9051, 0x5432, 0x7449, 0x0e44, 0xaa26, 0x88c6, 0x4b46, 0xffef, 0x167f, 0x19fe, 0x6716,
    0x62bd, 0x9c31, 0xf826, 0xa887, 0x0b71, 0xca34, 0x994e, 0xd27e, 0x5be7, 0x5ef5, 0x19c0, 0x5928, 0xb32c, 0x1b24, 0x9fda, 0x20d0,
    0xd1a6, 0xb022, 0x2637, 0x507b, 0x792c, 0xb65e, 0x3c71, 0xbcc8, 0x00a9, 0xa9a9, 0x3454, 0x11b5, 0xa405, 0x4587, 0xd04c, 0x4bc3,
    0x7a6a, 0xc305, 0x312c, 0x3cea, 0x2753, 0x2514, 0x4045, 0x47a9, 0xdc74, 0xbf8f, 0x74f3, 0xb4fe, 0xbec7, 0x2db0, 0x6cb9, 0x7657,
    0x324c, 0x6f97, 0x6b64, 0xdcbb, 0x7040, 0x4361, 0x5090, 0x92c7, 0xe0b2, 0xb4f0, 0xb0c9, 0xcddc, 0x0697, 0xf1ad, 0xba5f, 0xf104,
    0x13f6, 0xc550, 0x0243, 0x6155, 0x47c4, 0xb119, 0x0c07, 0xcb73, 0xcf02, 0xfa5f, 0xf3e8, 0xdd0c, 0xd6fc, 0x9d49, 0x9155, 0x413d,
    0x2eda, 0x35ce, 0x9a24, 0x8b09, 0xb794, 0xe7b0, 0xc1c3, 0xd5fc, 0xae54, 0xbe98, 0x72ef, 0xced8, 0x318e, 0x9e48, 0xa349, 0x7efa,
    0x17b9, 0xce33, 0xda65, 0xc8a4, 0x2bc8, 0x72fb, 0xdacc, 0x610d, 0x1f9c, 0x634e, 0x7ec9, 0x248a, 0xcfd0, 0x288d, 0x04a3, 0xe78f,
    0xfefc, 0x1467, 0x23f0, 0xc29b, 0xbeb9, 0x53ce, 0xff84, 0x7d14, 0xca4a, 0xe730, 0x4143, 0x50a4, 0xa6f3, 0x9167, 0x730f, 0x3f33,
    0xcd97, 0x4ddc, 0x034f, 0x7c52, 0x9d07, 0xdf1b, 0xe3fd, 0xc8a2, 0x2dce, 0x12c7, 0xe56a, 0x390f, 0x9791, 0xe3c3, 0xf69c, 0xfc5f,
    0x95d2, 0x8296, 0xb158, 0x4d46, 0x99d5, 0x49e5, 0x7e5a, 0xb719, 0x6a3d, 0x94e9, 0xa8a6, 0x2a50, 0xfb68, 0xd5d4, 0x867c, 0x1f9e,
    0x614c, 0x5edd, 0x31e8, 0xf82e, 0xa08f, 0x8b21, 0x9fbc, 0x46b6, 0xd260, 0x45f9, 0xae32, 0xd8fe, 0x7129, 0x3b03, 0xb98b, 0x16cd,
    0xab4c, 0xf3a7, 0x9243, 0x6436, 0x7180, 0x92aa, 0x8ddf, 0x0778, 0x0f49, 0xb620, 0x420f, 0x2ff5, 0x0bea, 0x51af, 0xbcf3, 0x3b92,
    0x281a, 0x9334, 0x024a, 0x685c, 0xd79e, 0xee20, 0xc800, 0x8f6c, 0x96dd, 0xbe84, 0x6ef3, 0x1e0b, 0xe5d2, 0x81b7, 0xa364, 0x53d7,
    0xe69d, 0xfde5, 0x3e63, 0x8ccc, 0x0560, 0x3547, 0x13ad, 0x9e0b, 0xe00a, 0x0c48, 0x843c, 0x7dc8, 0x1696, 0xf017, 0x11ee, 0xff5e,
    0xa7ce, 0xbd51, 0x883b, 0xb6bb, 0xd994, 0x0a48, 0xe206, 0x2252, 0x7132, 0x2018, 0x196e, 0xf786, 0xf74e, 0x3f86, 0x7822, 0xa95b,
    0xc6a6, 0xc7a8, 0xd8ad, 0x227a, 0x591a, 0x811e, 0x0acd, 0x6783, 0xf728, 0x59e0, 0x7be4, 0x5c80, 0x4ea3, 0x4f2d, 0xd0a8, 0xaf27,
    0xdce0, 0x2b1b, 0xa128, 0x3d8d, 0x513f, 0x2c63, 0xae61, 0x8bad, 0x1330, 0x0396, 0xa58b, 0xda02, 0xafc3, 0x3804, 0x8d91, 0x4936,
    0xad89, 0x5058, 0x5a0f, 0xa716, 0x6589, 0xdf34, 0xccd2, 0x1992, 0x0b7a, 0xc13f, 0x2900, 0x9825, 0xa81e, 0x92e8, 0xcf9d, 0x65c0,
    0x967d, 0x1e24, 0xcafd, 0x5087, 0x85d0, 0x802f, 0x2af7, 0x5ccf, 0x01ec, 0xfde7, 0x3c61, 0xacd8, 0x1002, 0x02b9, 0x9baf, 0x1189,
    0x9839, 0xb402, 0x423b, 0x1bc1, 0x7a3f, 0x9650, 0x3309, 0x3bd9, 0x6351, 0x61d6, 0xc447, 0x045f, 0x1b73, 0xc88d, 0x02e1, 0xc3f7,
    0xc3de, 0xeaf7, 0x5bfb, 0x42e9, 0xc913, 0x8d74, 0xacd3, 0x1b09, 0xb2f7, 0xd1f4, 0xe270, 0x5424, 0x625f, 0x7ed3, 0x3e90, 0x7f3f,
    0xc377, 0x435e, 0x6faf, 0x535c, 0x6d16, 0xc8f3, 0x7c9f, 0x50ca, 0xc89d, 0x12f1, 0xd35c, 0x68ce, 0x450c, 0x5bc7, 0x7ed5, 0x3896,
    0x1f03, 0xfcd1, 0x1b5c, 0xe7a2, 0xd3d1, 0xe543, 0x1026, 0x269d, 0xfad1, 0x7d66, 0xb838, 0xb475, 0x354c, 0x18a6, 0x2e45, 0xaa51,
    0xffb1, 0x4821, 0xab95, 0x2a7e, 0xd546, 0x14ee, 0xaa79, 0xd799, 0xe927, 0xb836, 0xba7b, 0xd520, 0x7288, 0xa9bf, 0x2242, 0x6122,
    0x30b3, 0xb27e, 0x587d, 0xf772, 0x03ba, 0x89a7, 0x3b2c, 0x96a4, 0xc7fd, 0x8df8, 0x205f, 0x5e29, 0xc51c, 0x4e0f, 0xe381, 0xb4de,
    0x9ee7, 0x0ce6, 0x2a92, 0x39aa, 0x3234, 0x17ef, 0x9865, 0xe85e, 0xd044, 0x43cb, 0xfa3a, 0x968d, 0xeed4, 0x3cf4, 0x394d, 0xd5d3,
    0x817b, 0x6fa8, 0x545b, 0x1d20, 0xfde4, 0x3f62, 0x9cc6, 0x0fd1, 0x2eb8, 0x57ac, 0xd9ca, 0x5416, 0x506d, 0x6f3a, 0xc6c9, 0xa8c7,
    0x4b31, 0x8898, 0x1518, 0x4d84, 0x5b17, 0xae05, 0xefc9, 0x30e2, 0xe32f, 0x1a70, 0xda85, 0x2844, 0xcd6a, 0xb021, 0x2534, 0x6065,
    0x66ff, 0x9a5f, 0xf072, 0x748b, 0xcc86, 0x4dc6, 0x1955, 0xccbd, 0x76fd, 0x98e6, 0x6bdd, 0x6502, 0x54bf, 0xf9c4, 0x5b6e, 0xd77c,
    0x0cc2, 0x0eb6, 0x58d4, 0x5edb, 0x37ee, 0x9812, 0x9f29, 0xd323, 0x17b1, 0xc63b, 0x5a35, 0x9d2c, 0xf430, 0x72e5, 0xc4d2, 0x91ca,
    0xdea2, 0x4b4f, 0xf6e6, 0x8625, 0x46c7, 0xa311, 0x26a2, 0xc5ee, 0xbcfd, 0x359c, 0xc876, 0xf91a, 0x85b0, 0xe04f, 0x490d, 0x96b2,
    0xd1eb, 0xfd6f, 0xb4e9, 0xa9d0, 0x4d2d, 0xf2be, 0x9a51, 0xfe7c, 0x94e7, 0xa6a8, 0xca3c, 0x9146, 0x522e, 0x0e6f, 0x810d, 0x19de,
    0x4736, 0x43eb, 0xda1a, 0xb7db, 0xa8ff, 0x7309, 0x3935, 0xadab, 0x727a, 0x5b4d, 0xf45f, 0x1d8a, 0x574e, 0x3b28, 0x92a0, 0x87d5,
    0xa73c, 0x4fa3, 0x5e26, 0xca13, 0xbe69, 0x831e, 0x28db, 0x52f5, 0xd5b4, 0xe61c, 0x7c64, 0xab31, 0x8eda, 0x3160, 0x70a6, 0xa587,
    0xd60e, 0x6fbb, 0x4748, 0x3d95, 0x4927, 0xbc98, 0x50f9, 0xfbae, 0x1312, 0x21b4, 0xa4c9, 0x894b, 0xd7c0, 0xb07e, 0x7a6b, 0xc204,
    0x2126, 0x365b, 0x3cac, 0x6115, 0x0784, 0xf3b5, 0x8051, 0x5489, 0xcff2, 0x0aaf, 0x05e1, 0xb4c6, 0x86ff, 0x9c1d, 0xd40a, 0x49a9,
    0x3216, 0x35cd, 0x9927, 0xbb17, 0xa847, 0xcbb1, 0x0dc0, 0x1dbf, 0x627b, 0x5af7, 0x5fee, 0x13d0, 0xe376, 0x4329, 0x18d8, 0x503b,
    0x396c, 0xf4f2, 0xb027, 0x2332, 0x0059, 0x5959, 0xc25d, 0x787f, 0xf406, 0x44d3, 0x9513, 0x4357, 0x66a6, 0xc306, 0x322f, 0x0cf4,
    0x3880, 0x0915, 0x8c46, 0x8fea, 0x105b, 0x5be0, 0x59f2, 0x69f6, 0x6c3f, 0xf0d1, 0xd728, 0x5896, 0x1c99, 0x5556, 0x0126, 0x372d,
    0x5bd1, 0x68c3, 0x4801, 0x8bb5, 0x0b28, 0x936d, 0x5b13, 0xaa01, 0xafe1, 0x1a26, 0x8cd3, 0x1a7f, 0xd58a, 0xd822, 0xadf5, 0x2c24,
    0xe926, 0xb937, 0xaa71, 0xdf91, 0x6977, 0xedbe, 0x6583, 0xd53e, 0x6c96, 0x5978, 0xe37c, 0x4923, 0xb89c, 0x10d1, 0xd16a, 0x7cee,
    0x21bb, 0xabc6, 0x792d, 0xb75f, 0x2c7b, 0xb679, 0x1b56, 0xeda8, 0x7395, 0xa5a9, 0xf820, 0xae81, 0x6b4d, 0xf592, 0xc14c, 0x5a73,
    0xdb6a, 0xd6a0, 0xc115, 0x032a, 0x1937, 0xaedf, 0x3513, 0x47f9, 0x8c24, 0xed88, 0x53b5, 0x84ff, 0xbe0b, 0xe17c, 0x6b35, 0x8dea,
    0x324d, 0x6e96, 0x7b6e, 0xd60a, 0x6bbf, 0x0760, 0x1751, 0x26db, 0xbc97, 0x5ff6, 0x0bc8, 0x738d, 0xbdb1, 0x68db, 0x5019, 0x1b4e,
    0xf5b0, 0xe36e, 0x5b31, 0x8823, 0xaea3, 0x496f, 0xf4d0, 0x9205, 0x2270, 0x5310, 0x215a, 0x4a27, 0x8f85, 0x7f34, 0xc87c, 0xf310,
    0x25f4, 0xa0a5, 0xa10b, 0x1eae, 0x4077, 0x759b, 0xcd9d, 0x47d6, 0xa30b, 0x3cb8, 0x7501, 0x5707, 0x7261, 0x4056, 0x54ba, 0xfcc1,
    0x0b4c, 0xf709, 0x78c1, 0x4ab8, 0x101a, 0x1aa1, 0x0b54, 0xef11, 0xe83a, 0xb420, 0x6019, 0x1a83, 0x2976, 0xee53, 0xbb73, 0xcc23,
    0xe863, 0xed79, 0xa244, 0x62fc, 0xdd70, 0xaa80, 0x2e60, 0x8f74, 0x8ec5, 0x2e7f, 0x906b, 0x6e08, 0xe5f0, 0xa395, 0xa226, 0x009e,
    0x9e9e, 0x759f, 0xc999, 0x07fe, 0x89cf, 0x5344, 0x750e, 0x5808, 0x8207, 0x20c9, 0xc8bf, 0x30d3, 0xd21e, 0x3b87, 0x3d0f, 0xd3bd,
    0x892f, 0xb3a4, 0x93ac, 0x9ad2, 0x7dff, 0x21a1, 0xb1dc, 0xc9c2, 0x5ca5, 0x6b86, 0x3e59, 0xb6f6, 0x94d9, 0x9896, 0x1bad, 0x1653,
    0x35d2, 0x8638, 0x5bda, 0x63c8, 0xf84f, 0xc1ee, 0xf8d1, 0x5f70, 0x8d4e, 0x96e9, 0x8ab0, 0x1f26, 0xd9f4, 0x6a28, 0x81fc, 0xe82f,
    0xa135, 0x2090, 0x91e6, 0xf28e, 0xaa61, 0xcf81, 0x79dc, 0x46ae, 0xca78, 0xd502, 0x50aa, 0xa8fd, 0x710b, 0x1921, 0xb8c9, 0x4584,
    0xd34f, 0x7bdd, 0x65b9, 0xef04, 0xfd2f, 0xf4a9, 0xeb7c, 0xc17b, 0x6d44, 0x9aa1, 0x0e8c, 0x62ee, 0xcf62, 0x9a3f, 0x9012, 0x1771,
    0x06fb, 0x9dc1, 0x19dd, 0x4435, 0x73f5, 0xc5c9, 0x9bda, 0x64fc, 0xbb4a, 0xf51a, 0x49c4, 0x5f7b, 0x8645, 0x26a7, 0xc0eb, 0xecdf,
    0x15e9, 0xbc75, 0xbd14, 0xcd7e, 0xa435, 0x75b7, 0xe1b1, 0xa6f8, 0x9a6c, 0xc341, 0x7568, 0x3e6e, 0x81c1, 0xd512, 0x40ba, 0xb856,
    0xda1b, 0xb6da, 0xb8f5, 0x79b8, 0x22ca, 0xe9aa, 0x35bb, 0xef51, 0xa87a, 0xf68c, 0xec4f, 0x8579, 0x2986, 0x1ea3, 0x4d7a, 0xa5e9,
    0xb860, 0xec2d, 0xe71b, 0x6a68, 0xc1bc, 0xaa83, 0x2d63, 0xbf6a, 0x9116, 0x027e, 0x5c68, 0xa64b, 0x29df, 0x47fa, 0x8f27, 0xdd96,
    0x4c66, 0xa8fe, 0x7208, 0x293f, 0xa71a, 0x6985, 0x1f4c, 0xb39e, 0xa996, 0x0b6b, 0xd02e, 0x29a1, 0x3984, 0x1c1a, 0xd6d5, 0xb460,
    0x2059, 0x582f, 0xa520, 0x71a9, 0xbb83, 0x3cd3, 0x1e6a, 0x84b3, 0xf247, 0x63a8, 0x982f, 0xa214, 0x32ac, 0x8f77, 0x8dc6, 0x1e61,
    0x8fb8, 0x4209, 0x29f3, 0x6bd6, 0x6e09, 0xe4f1, 0xb39f, 0xa897, 0x1b61, 0xda9f, 0x325e, 0x7d85, 0x5bdb, 0x62c9, 0xe845, 0xcb5f,
    0xe32e, 0x1b71, 0xca8f, 0x22f5, 0xd695, 0xf420, 0x62f5, 0xd479, 0x3ada, 0x7159, 0x4b73, 0xcada, 0x77a0, 0xd4b0, 0xf313, 0x26f7,
    0x90bb, 0xbed8, 0x32af, 0x8c74, 0xbdd8, 0x01b2, 0xa3b9, 0x8e0a, 0xe1b0, 0xa7f9, 0x8a66, 0xc9f0, 0x6e97, 0x7a6f, 0xc600, 0x610e,
    0x1c9f, 0x5350, 0x611a, 0x088b, 0x03d3, 0xe0ce, 0xc88c, 0x03e0, 0xd3fd, 0xc96f, 0xf108, 0x1ffa, 0x0528, 0x7d0f, 0xd151, 0x47d5,
    0xa008, 0x0ca6, 0x6ad2, 0x7b06, 0xbe62, 0x8815, 0x9895, 0x18ae, 0x264d, 0x2a01, 0xaa39, 0x97d9, 0xab8b, 0x3460, 0x2581, 0xd5d0,
    0x8278, 0x5fb6, 0x4b88, 0x3121, 0x31e7, 0xf721, 0x50e9, 0xebbe, 0x03b9, 0x8aa4, 0x0b32, 0x8977, 0xebfc, 0x41fb, 0xe81c, 0x9206,
    0x2173, 0x630e, 0x3e89, 0x6626, 0x4386, 0xb777, 0x0453, 0x177f, 0x08f5, 0x7dad, 0x73f3, 0xc3cf, 0xfbe6, 0x5b5a, 0xe348, 0x7d17,
    0xc949, 0xd72e, 0x5e90, 0x7ca5, 0x6af0, 0x5924, 0xbf20, 0xdb5c, 0xe096, 0x90d4, 0xd1b7, 0xa133, 0x2696, 0xf1da, 0xcd28, 0xf263,
    0x478c, 0xf951, 0xcefb, 0x12ad, 0x8f00, 0xfab1, 0x1d06, 0xdbc2, 0x7e08, 0xe54b, 0x182e, 0xa6cd, 0xaf59, 0xa29e, 0xb826, 0xaa6b,
    0xc58b, 0xd998, 0x0644, 0x227e, 0x5d1e, 0xc136, 0x2009, 0x087f, 0xf727, 0x56ef, 0x8b82, 0x3c1f, 0xd2a6, 0x833f, 0x09fa, 0x63a9,
    0x992e, 0xb21e, 0x381d, 0x9488, 0xc9c7, 0x59a0, 0x3ba4, 0x1e2c, 0xc2f5, 0xd0d7, 0xd058, 0x5fd7, 0x2ae9, 0x42d1, 0xf12b, 0x3cd9,
    0x1460, 0x24f7, 0xb2ad, 0x8bae, 0x1033, 0x3388, 0xba58, 0xf603, 0x63c0, 0xf047, 0x41be, 0xad59, 0x8088, 0x8d50, 0x88f7, 0x7a77,
    0xde18, 0xf1f5, 0xe207, 0x2353, 0x6138, 0x2aa9, 0x0291, 0xb387, 0xb08f, 0x8b9a, 0x2407, 0x425d, 0x7da7, 0x79f9, 0x638b, 0xbb0c,
    0xb35c, 0x6b54, 0xec8b, 0x41bd, 0xae5a, 0xb096, 0x9283, 0xa4f6, 0xb674, 0x165b, 0x3dda, 0x0668, 0x0e52, 0xbc30, 0xf851, 0xdff0,
    0x0816, 0x9e4e, 0xa54f, 0x1ec6, 0x281f, 0x9631, 0x5268, 0x4829, 0xa39d, 0xaa2e, 0x80ce, 0xcb16, 0xaa67, 0xc987, 0x19e0, 0x7908,
    0x927a, 0x5d0f, 0xd027, 0x20a8, 0xa9de, 0x4323, 0x12d2, 0xf07f, 0x7986, 0x1cf4, 0x383b, 0xb2ae, 0x88ad, 0x202d, 0x2c5b, 0x9659,
    0x3a00, 0xab83, 0x3c68, 0xa5d1, 0x8058, 0x5d80, 0x5fa8, 0x5596, 0xc1e6, 0xf0d9, 0xdf20, 0xd8c6, 0x4911, 0x8aae, 0x0138, 0x2933,
    0xab16, 0xa9fd, 0x6000, 0x039a, 0xa987, 0x1a7a, 0xd08f, 0x8800, 0x8d80, 0x5827, 0xad28, 0xf1f9, 0xee0b, 0xe32b, 0x1e74, 0x9aad,
    0x0280, 0xa296, 0xb02e, 0x2a3b, 0x9003, 0x0660, 0x065a, 0x3c60, 0xadd9, 0x0008, 0x0808, 0x8050, 0x5588, 0xdff8, 0x001e, 0x1e1e,
    0xf0c7, 0xc13e, 0x2801, 0x882f, 0xa2af, 0x8917, 0x8b9c, 0x2201, 0x2261, 0x4201, 0x21fb, 0xeb86, 0x3b81, 0x3b09, 0xb381, 0xb689,
    0xeba6, 0x1ba1, 0x1a5f, 0xf5aa, 0xf974, 0xebde, 0x63d9, 0xe95e, 0xc14f, 0x5970, 0xeb74, 0xc973, 0xed14, 0xcf29, 0xd174, 0x62f0,
    0xd17c, 0x6af8, 0x512c, 0x3f70, 0x8ed4, 0x3f6e, 0x90ca, 0xcfa9, 0x51f4, 0xe7a8, 0xd9db, 0x4507, 0x50cc, 0xce9b, 0x72cd, 0xecfa,
    0x30cc, 0xcd01, 0xdb4a, 0xf680, 0xe043, 0x4501, 0x56ca, 0xaea7, 0x4d6b, 0xb4f8, 0xb8c1, 0x4d8c, 0x531f, 0x2e55, 0xba41, 0xef1a,
    0xe331, 0x046e, 0x2a42, 0xe97a, 0xe56b, 0x380e, 0x879b, 0xe972, 0xed63, 0xb85e, 0xd213, 0x368a, 0xed7d, 0xa640, 0x22d4, 0xf7b4,
    0xc57c, 0x2e6f, 0x807b, 0x7ea3, 0x4ee0, 0x0c6e, 0xa21a, 0x3ca2, 0x6f1b, 0xe7e8, 0x999b, 0x07ab, 0xdc9a, 0x5161, 0x723d, 0x1c0a,
    0xc6c5, 0xa4cb, 0x8b49, 0xf7d4, 0xa51c, 0x4d95, 0x4a06, 0xaea4, 0x4e68, 0x84e6, 0xa712, 0x618d, 0x9f1c, 0xe616, 0x766e, 0x0b75,
    0xce30, 0xd966, 0xf8ba, 0x341b, 0x5efa, 0x16cf, 0xa94e, 0xd3b3, 0x8721, 0x53c8, 0xf982, 0x1d28, 0xf5ec, 0xbf32, 0xc94e, 0xd029,
    0x2ea6, 0x49b2, 0x290d, 0x9528, 0x786c, 0xe715, 0x6466, 0x21d0, 0xc0ad, 0xaa99, 0x3779, 0x0f85, 0x7aec, 0x4583, 0xd448, 0x0beb,
    0x50ae, 0xacf9, 0x3123, 0x33e5, 0xd735, 0x458b, 0xdc40, 0x8bbb, 0x0526, 0x7301, 0x313d, 0x2dfb, 0x27f2, 0x84b5, 0xf441, 0x0394,
    0xa789, 0xfa16, 0xbaa1, 0x0ffa, 0x0593, 0xc6b4, 0xd5ba, 0xe812, 0x9c08, 0xc11f, 0x0920, 0xb973, 0xee35, 0xdd15, 0xcfe5, 0x1db8,
    0x657c, 0x2ac1, 0x6af9, 0x502d, 0x2f7a, 0x8465, 0x2491, 0xd4cb, 0x8868, 0xe5e8, 0xbb8d, 0x32dd, 0xfe06, 0xee9d, 0x75bd, 0xebbb,
    0x06bc, 0xda86, 0x2b47, 0xfd74, 0xaff2, 0x0935, 0xac66, 0xaebc, 0x5670, 0x141d, 0x598a, 0x118e, 0x9f3e, 0xc434, 0x772c, 0x583c,
    0xb633, 0x511c, 0x0f40, 0xbf29, 0xd255, 0x70cc, 0xcfed, 0x15b0, 0xe52c, 0x7f49, 0xb501, 0x5033, 0x3164, 0x74a2, 0xe5af, 0xfcca,
    0x0047, 0x4747, 0x329a, 0xb941, 0xdc07, 0xccfc, 0x37bc, 0xca40, 0xed3a, 0xe107, 0x104e, 0x4ef5, 0x197b, 0xe293, 0xb7c7, 0xb4e3,
    0xa3da, 0xed69, 0xb254, 0x7257, 0x7660, 0x057b, 0x2e5c, 0xb348, 0x7f40, 0xbc08, 0xc069, 0x6e5d, 0xb0a5, 0xa1b0, 0xa515, 0x449c,
    0xda5c, 0xf19d, 0x8a6f, 0xc0f9, 0xfecd, 0x2556, 0x0207, 0x2511, 0x4540, 0x178b, 0xfc01, 0xcb8c, 0x30fd, 0xfc30, 0xfabd, 0x110a,
    0x1bba, 0x0144, 0x554f, 0x183f, 0xb7dc, 0xaff8, 0x033f, 0x0c22, 0xee56, 0xbe76, 0x9c01, 0xc816, 0x997a, 0xe64a, 0x2a32, 0x990a,
    0x963a, 0x5963, 0xf867, 0xe9c6, 0x59d7, 0x4cd3, 0x1d4b, 0x968f, 0xecd6, 0x1ce0, 0x2c2f, 0xe22d, 0x0979, 0xe02a, 0x2c68, 0xa56a,
    0x3be3, 0x596b, 0xf06f, 0x6996, 0x0c5f, 0x932b, 0x1d55, 0x8891, 0x1c11, 0xddde, 0x042e, 0x6a02, 0xabd6, 0x693d, 0xa7f4, 0x876b,
    0x1982, 0x1b6a, 0xd194, 0x8210, 0x37de, 0xa822, 0xaed4, 0x3e18, 0xf7b7, 0xc67f, 0x1e71, 0x9fa8, 0x52a2, 0x82e3, 0xc42d, 0x6e35,
    0xd8cd, 0x421a, 0x3ae0, 0x4b63, 0xdaca, 0x670b, 0x7fa0, 0x5ce8, 0x26cb, 0xac87, 0x4f5d, 0xa0d8, 0xdc76, 0xbd8d, 0x54e7, 0xa19c,
    0x8939, 0xa5b2, 0xe33b, 0x0e64, 0x8a06, 0xa990, 0x0d6d, 0xb012, 0x1607, 0x6186, 0x9417, 0x5658, 0x3c35, 0xf88c, 0x022d, 0x0f3b,
    0xc452, 0x114a, 0x5bfa, 0x43e8, 0xd919, 0x87c5, 0xb72c, 0x5f08, 0xf536, 0x65e8, 0xbe55, 0xbf22, 0xd95e, 0xc082, 0x85b6, 0xe649,
    0x2931, 0xa914, 0x89e9, 0x7562, 0x3464, 0x2185, 0x95f8, 0xa8bc, 0x304a, 0x4b87, 0x3e2e, 0xc181, 0x97be, 0xccec, 0x27ac, 0xdaeb,
    0x462a, 0x4efc, 0x1072, 0x72c9, 0xe8fe, 0x70e4, 0xe7c5, 0xb4b6, 0xf68f, 0xef4c, 0xb567, 0x3655, 0x32a2, 0x8179, 0x6daa, 0x744f,
    0x0842, 0xca1a, 0xb760, 0x1344, 0x77e2, 0x96f2, 0x91ab, 0xbfc3, 0x38bf, 0x362a, 0x4ddd, 0x024e, 0x6c58, 0x97b6, 0xc4e4, 0xa7fc,
    0x8f63, 0x99d2, 0x4ee2, 0x0e6c, 0x820e, 0x29c0, 0x58e5, 0x6fea, 0x1619, 0x7f98, 0x64d0, 0x9766, 0x1434, 0x70a3, 0xa082, 0x862c,
    0x4fce, 0x334b, 0x799b, 0x01e9, 0xf8e2, 0x6c43, 0x8cad, 0x6401, 0x46b7, 0xd361, 0x55f3, 0xa483, 0xc301, 0x3528, 0x7cc2, 0x0d97,
    0x4ae8, 0x404a, 0x48a6, 0x2c12, 0xdf10, 0xe8f6, 0x78ec, 0x6795, 0xe13e, 0x2977, 0xef52, 0xab79, 0xc692, 0xf39c, 0xa978, 0xe585,
    0xd6e0, 0x8155, 0x4186, 0x9561, 0x3125, 0x35e3, 0xb709, 0x7a2d, 0x8442, 0x03b6, 0x85ab, 0xfb54, 0xe9e8, 0x77f9, 0x8de9, 0x314e,
    0x5e88, 0x64bd, 0xfa0b, 0xa7bc, 0xcf23, 0xdb7e, 0xc2b4, 0x9196, 0x82fe, 0xd930, 0xaeec, 0x0620, 0x461a, 0x7ecc, 0x218f, 0x9ff2,
    0x08f8, 0x70a0, 0xa381, 0xb632, 0x501d, 0x1f4a, 0xb598, 0xc9aa, 0x34cd, 0x882c, 0xa1ac, 0xb909, 0x944f, 0x0e00, 0xee62, 0x8a42,
    0xedd4, 0x0fe9, 0x1680, 0xe601, 0x6179, 0x6be8, 0x5037, 0x3560, 0x348a, 0xcf6b, 0x9336, 0x0048, 0x4848, 0xc2fc, 0xd9de, 0x4002,
    0x00ee, 0xeeee, 0x06ce, 0xa8f4, 0x7802, 0x897b, 0xe7f0, 0x8183, 0x9750, 0x2202, 0x2162, 0x721f, 0x3e28, 0xc787, 0xf782, 0xf34a,
    0x7fae, 0x52e6, 0xc6a7, 0xc6a9, 0xc8a7, 0x28cb, 0x42e5, 0xc51f, 0x4d0c, 0xd39f, 0xab0d, 0xb2e6, 0xc0e5, 0xe2d1, 0xf585, 0xd65b,
    0x3aee, 0x456d, 0x3aa6, 0x0d25, 0xf85a, 0xd4fb, 0xb858, 0xd415, 0x56b6, 0xd2db, 0xfe42, 0xaad9, 0x7739, 0x4d29, 0xf6ba, 0xda79,
    0xd4b8, 0xfb1b, 0xa6a7, 0xc533, 0x6120, 0x32b1, 0x926a, 0x4d1f, 0xc08c, 0x8bb8, 0x0625, 0x431f, 0x2eee, 0x01fa, 0xebf1, 0x4cf6,
    0x386e, 0xe7fb, 0x8a88, 0x271e, 0x6859, 0xd29b, 0xbe02, 0xe875, 0xfb6f, 0xd2d3, 0xf64a, 0x2a89, 0x22b1, 0x92d1, 0xf6a4, 0xc467,
    0x247f, 0x3a25, 0x8ea6, 0x4d1c, 0xc38f, 0xbba6, 0x19f6, 0x6f1e, 0xe2ed, 0xc9b9, 0x27de, 0xa899, 0x156f, 0x3af3, 0x5870, 0xfa7f,
    0xd3c8, 0xfc5a, 0x90d7, 0xd2b4, 0x912d, 0x3945, 0xdddb, 0x012b, 0x3a20, 0x8ba3, 0x1d3e, 0xe3fa, 0xcfa5, 0x5df8, 0x27d0, 0xa697,
    0xf503, 0x50dd, 0xdf8a, 0x726c, 0x4d5b, 0x84c8, 0x893c, 0xa0b7, 0xb319, 0x2e11, 0xfe05, 0xed9e, 0x45a3, 0xf468, 0x2abd, 0x1685,
    0xe304, 0x315b, 0x4b9d, 0x2434, 0x716e, 0x7c44, 0x8b11, 0xaf8c, 0x774b, 0x3f5b, 0xa5ff, 0xae76, 0x9cba, 0x73ad, 0x9d91, 0x498d,
    0x1632, 0x54b3, 0xf5c8, 0x9b16, 0xa830, 0xbcc6, 0x0ea7, 0x49c5, 0x5e7a, 0x964f, 0x2c16, 0xdb14, 0xa8de, 0x5228, 0x0869, 0xe131,
    0x2678, 0x1f34, 0xcbe6, 0x5a97, 0x3f8e, 0x702a, 0x290b, 0x932e, 0x1850, 0xd8b3, 0x3c64, 0xa9dd, 0x4020, 0x22cc, 0xefac, 0x5587,
    0xd0f7, 0xf078, 0x7e81, 0x6cc2, 0x0d2c, 0xf153, 0x44a1, 0xe761, 0x1012, 0x12a9, 0x8b04, 0xba99, 0x37c2, 0xb43e, 0x7e07, 0xea44,
    0xe848, 0xc652, 0x335c, 0x6e8c, 0x6174, 0x66e5, 0x8045, 0x409d, 0x9f71, 0x8b7b, 0xc5e6, 0xb4f5, 0xb5cc, 0x9dfe, 0x26e2, 0x85ae,
    0xfe51, 0xb9ca, 0x578c, 0xf9ea, 0x7540, 0x1646, 0x20c7, 0xc6b1, 0xd0bf, 0xb830, 0xbc7d, 0xb51c, 0x4d2e, 0xf1bd, 0xaa4f, 0xe1af,
    0xb8e6, 0x6aab, 0x027f, 0x5d69, 0xb641, 0x236e, 0x5c05, 0xcb26, 0x9a57, 0xf87a, 0xf4db, 0x990e, 0x923e, 0x194b, 0xd2a3, 0x863a,
    0x59d8, 0x43dc, 0xed2d, 0xf610, 0x70d3, 0xd0f2, 0xf57d, 0x2ea3, 0x4cb7, 0x792f, 0xb55d, 0x0c6f, 0xa31b, 0x2ca8, 0x65aa, 0xfc17,
    0xdd9a, 0x406a, 0x6886, 0x0d44, 0x993b, 0xa70b, 0x7894, 0x1fed, 0x123f, 0x1d92, 0x4f56, 0xabd3, 0x6c38, 0xf7d6, 0xa71e, 0x6d81,
    0x5f64, 0x995a, 0xc66a, 0x0b64, 0xdf21, 0xd9c7, 0x591b, 0x801f, 0x1ac7, 0x6d32, 0xecd7, 0x1de1, 0x3c25, 0xe89c, 0x1286, 0xa42b,
    0x6ba9, 0x1176, 0x67c6, 0xb26d, 0x4b6e, 0xd7c7, 0xb779, 0x0a5d, 0xf713, 0x62db, 0xfa57, 0xfbe0, 0x5d5c, 0x8374, 0x42b1, 0x914b,
    0x5f23, 0xde1d, 0xf4f0, 0xb225, 0x0326, 0x153b, 0x6ea7, 0x4a5f, 0xf7fd, 0x8c35, 0xfc99, 0x5314, 0x255e, 0x0a0f, 0xa541, 0x10c8,
    0xc873, 0xfc1f, 0xd592, 0xc03a, 0x3d0e, 0xd2bc, 0x9925, 0xb915, 0x8853, 0xded3, 0x3a3e, 0x95bd, 0xedf9, 0x22c4, 0xe7a4, 0xd5d7,
    0x857f, 0x2f80, 0x7e9f, 0x72dc, 0xfdeb, 0x306d, 0x6ca0, 0x6f4e, 0xb2bd, 0x9bbe, 0x0098, 0x9898, 0x15a3, 0xf63f, 0x5ffc, 0x01c2,
    0xd3c9, 0xfd5b, 0x80dd, 0xd805, 0x8ad2, 0x7d44, 0x9a1a, 0xb537, 0x6605, 0x60a5, 0xa63f, 0x5dab, 0x7483, 0xc48e, 0xcd96, 0x4cdd,
    0x1345, 0x76e3, 0x86f8, 0x9b1a, 0xa43c, 0x7cbe, 0x71eb, 0xf9c1, 0x5e6b, 0x875e, 0x2cb7, 0x7ab5, 0x1cda, 0x1615, 0x7394, 0xa4a8,
    0xe82a, 0xa430, 0x70b2, 0xb193, 0x868d, 0xee6f, 0x874f, 0x3da6, 0x7a14, 0xbd7b, 0xa211, 0x37a9, 0xdf55, 0xadb3, 0x6a62, 0xcbb6,
    0x0ac7, 0x6d89, 0x576c, 0x190a, 0x93e2, 0xd49c, 0xdf3f, 0xc7d9, 0xa9dc, 0x4121, 0x32c6, 0xe51d, 0x4e78, 0x94f6, 0xb7b9, 0xca9d,
    0x30e7, 0xe62a, 0x4a52, 0xfaf0, 0x5c47, 0x8964, 0xf8ef, 0x614e, 0x5cdf, 0x11fc, 0xed4c, 0x9771, 0x0323, 0x103e, 0x3e85, 0x6a2a,
    0x83fe, 0xc83b, 0xb457, 0x176e, 0x19e4, 0x7d0c, 0xd252, 0x77cb, 0xbfdb, 0x20a7, 0xa6d1, 0xb345, 0x724d, 0x6c7a, 0xb594, 0xc5a6,
    0xf4b5, 0xf760, 0x11a8, 0xb918, 0x855e, 0x0ea1, 0x4fc3, 0x3e46, 0xa9e9, 0x7414, 0x5319, 0x2853, 0xda7d, 0xd0bc, 0xbb33, 0x8c63,
    0xaacf, 0x612f, 0x3dbe, 0x620c, 0x2d80, 0x5c89, 0x47aa, 0xdf77, 0x8f91, 0x6b20, 0x98ff, 0x72c4, 0xe5f3, 0xa096, 0x9238, 0x1f4d,
    0xb29f, 0xb99c, 0x01da, 0xcbd1, 0x6da0, 0x7e45, 0xa806, 0x8af0, 0x5f66, 0x9b58, 0xe67e, 0x1e06, 0xe8df, 0x51c5, 0xd699, 0xf82c,
    0xa28d, 0xab35, 0x8ade, 0x7148, 0x5a62, 0xca7b, 0xd601, 0x60b4, 0xb72e, 0x5d0a, 0xd522, 0x708a, 0x89ab, 0x3720, 0x56dc, 0xb8b1,
    0x3dfc, 0x204e, 0x4f38, 0xc5bd, 0xefae, 0x5785, 0xf0e3, 0xe51a, 0x497f, 0xe4c0, 0x82ae, 0x8960, 0xfceb, 0x2166, 0x761b, 0x7e00,
    0xed43, 0x987e, 0xf345, 0x70a1, 0xa280, 0xa638, 0x5aac, 0x04b5, 0xf199, 0x8e6b, 0x80d1, 0xd409, 0x4aaa, 0x0208, 0x2a1e, 0xb526,
    0x7714, 0x6004, 0x079e, 0xe9af, 0x30be, 0xbf73, 0x880f, 0x828f, 0xa841, 0xcdb7, 0x6dfc, 0x2219, 0x3a79, 0xd2fa, 0xdf63, 0x9b85,
    0x3ba3, 0x192b, 0xb2c3, 0xe5c0, 0x93a5, 0x93db, 0xeda5, 0x7e98, 0x75db, 0x8ddd, 0x057a, 0x2f5d, 0xa342, 0x75f1, 0xa7f7, 0x8468,
    0x299c, 0x04b9, 0xfd95, 0x4e13, 0xff9d, 0x640d, 0x4abb, 0x1319, 0x2abf, 0x1487, 0xc310, 0x2439, 0x7c63, 0xac36, 0xfeec, 0x0477,
    0x335b, 0x698b, 0x1142, 0x53f2, 0xc3b8, 0x8c91, 0x583d, 0xb732, 0x4116, 0x05f1, 0xa4d6, 0x9654, 0x370d, 0x7bf1, 0x4995, 0x0e2a,
    0xc448, 0x0b50, 0xeb15, 0xa812, 0x9ee4, 0x0fe5, 0x1a8c, 0x2679, 0x1e35, 0xdbec, 0x5026, 0x2471, 0x342b, 0x6eca, 0x2732, 0x4475,
    0x33b5, 0x8765, 0x178c, 0xfb06, 0xbbba, 0x05ea, 0xbfcd, 0x36b1, 0xd646, 0x27f3, 0x85b4, 0xe44b, 0x0925, 0xbc76, 0xbe17, 0xfd60,
    0xbbe6, 0x59b6, 0x2db2, 0x6ebb, 0x5643, 0x272e, 0x5869, 0xe366, 0x5339, 0x0873, 0xfb2b, 0x9697, 0xf4ce, 0x8c1b, 0xd2b7, 0x922e,
    0x095b, 0xc208, 0x2d2a, 0xf623, 0x43e0, 0xd111, 0x0795, 0xe2a4, 0x80f0, 0xf528, 0x7bf6, 0x4e92, 0x7e1c, 0xf15f, 0x48ad, 0x2719,
    0x6f5e, 0xa2ad, 0x8b15, 0xab88, 0x3763, 0x159f, 0xca03, 0xae79, 0x93b5, 0x83cb, 0xfd0e, 0xd588, 0xda20, 0x8de1, 0x3946, 0xded8,
    0x3135, 0x25f3, 0xa7a2, 0xd13d, 0x2bb9, 0x038a, 0xb997, 0x0ad1, 0x7b9f, 0x27fb, 0x8dbc, 0x641b, 0x5cad, 0x638e, 0xbe09, 0xe37e,
    0x4b21, 0x9888, 0x05b3, 0xe694, 0xf4ec, 0xae39, 0xd3f5, 0xc167, 0x7158, 0x4a72, 0xdad0, 0x7d11, 0xcf4f, 0xb712, 0x6136, 0x24a7,
    0xe2fd, 0xd9a9, 0x3775, 0x0389, 0xba94, 0x3acf, 0x644c, 0x0bfa, 0x41bf, 0xac58, 0x9082, 0x87e1, 0x9308, 0x3e76, 0x99d9, 0x45e9,
    0xbe22, 0xc855, 0xda39, 0x94f8, 0xb9b7, 0x2af1, 0x5ac9, 0x61d0, 0xc241, 0x6463, 0x24d5, 0x908f, 0x8aec, 0x437a, 0x4b8b, 0x3222,
    0x01f9, 0xe8f2, 0x7ce8, 0x27bd, 0xcbfa, 0x468b, 0xef5d, 0xa476, 0x36f4, 0x9303, 0x357d, 0x2997, 0x0fb2, 0x4ddb, 0x0448, 0x0c64,
    0xa810, 0x9ce6, 0x2ff1, 0x0fee, 0x1187, 0x9637, 0x546e, 0x2815, 0x9c3b, 0xf22c, 0x08c3, 0x4b9b, 0x2232, 0x1152, 0x43e2, 0xd313,
    0x2781, 0xf7c6, 0xb70e, 0x7d2a, 0xf474, 0x36a1, 0xc656, 0x3758, 0x2ea4, 0x4bb0, 0x0919, 0x804a, 0x4f92, 0x6f17, 0xebe4, 0x59e3,
    0x78e7, 0x6c9e, 0x5170, 0x632c, 0x1cab, 0x6764, 0x10cf, 0xcf74, 0x8c29, 0xe085, 0x83c7, 0xf102, 0x15f0, 0xa56c, 0x3de5, 0x3957,
    0xcfc9, 0x3194, 0x8452, 0x13a6, 0x9500, 0x5044, 0x4613, 0x77c5, 0xb1d5, 0xc0cb, 0xccff, 0x34bf, 0xfa5e, 0xf2e9, 0xcd06, 0xdc4d,
    0x86b6, 0xd554, 0x06fc, 0x9ac6, 0x69eb, 0x7122, 0x3008, 0x09c5, 0x5c96, 0x58b5, 0x3fba, 0x441e, 0x58de, 0x54d1, 0x97aa, 0xd8f8,
    0x772f, 0x5b3f, 0x862d, 0x4ecf, 0x2341, 0x732a, 0x1a16, 0xbce3, 0x2b82, 0x38b1, 0x3824, 0xadb1, 0x6860, 0xeba2, 0x1fa5, 0x5a77,
    0xdf6e, 0x9688, 0xebd1, 0x6cd6, 0x1938, 0xa1d0, 0xc575, 0x2766, 0x1021, 0x219a, 0x8ae7, 0x4871, 0xfbc5, 0x7879, 0xf200, 0x24ef,
    0xaab5, 0x1b55, 0xeeab, 0x438b, 0xba7a, 0xd421, 0x6282, 0xa30e, 0x39bd, 0x2523, 0x7772, 0x0662, 0x0458, 0x1c74, 0xb8bb, 0x37f6,
    0x800a, 0x0fd2, 0x2dbb, 0x67b2, 0xc619, 0x7817, 0x9c6e, 0xa779, 0x0ae6, 0x4ca8, 0x6630, 0x5590, 0xc7e0, 0x90e5, 0xe086, 0x80c4,
    0xc11c, 0x0a23, 0x896d, 0xf1e6, 0xf114, 0x03e6, 0xd5fb, 0xa953, 0xceae, 0x47f8, 0x8d25, 0xfd82, 0x5904, 0x9f00, 0xfa0a, 0xa6bd,
    0xdf29, 0xd1cf, 0xd94b, 0xd597, 0xc53f, 0x6d2c, 0xf2c9, 0xed26, 0xfd1b, 0xc09d, 0x9aa9, 0x0684, 0xe2be, 0x9aea, 0x45c7, 0x900c,
    0x096f, 0xf63c, 0x5cff, 0x31dc, 0xcc1a, 0xd15a, 0x4cde, 0x1046, 0x46fd, 0x992b, 0xb71b, 0x683f, 0xb4fd, 0xbdc4, 0x1dae, 0x736a,
    0x5a56, 0xfe4f, 0xa7d4, 0xa74b, 0x38d4, 0x5d41, 0x9e69, 0x8268, 0x4fa6, 0x5b23, 0x9a31, 0x9e1c, 0xf71d, 0x6cd5, 0x1a3b, 0x91ce,
    0xdaa6, 0x0b67, 0xdc22, 0xe9d9, 0x46c8, 0xac1e, 0xd6c4, 0xa571, 0x20f8, 0xf98e, 0x1124, 0x3594, 0xc07e, 0x794a, 0xd038, 0x3fb7,
    0x4913, 0x88ac, 0x212c, 0x3c51, 0x9ce8, 0x21ff, 0xef82, 0x7ba9, 0x11cd, 0xdc7d, 0xb686, 0xe4a9, 0xebc7, 0x7ac0, 0x69af, 0x3566,
    0x328c, 0xaf57, 0xac90, 0x584a, 0xc045, 0x4271, 0x518b, 0x98d7, 0x5aec, 0x44f5, 0xb335, 0x023d, 0x1f2b, 0xd4f9, 0xba5a, 0xf401,
    0x43d4, 0xe525, 0x7640, 0x255b, 0x0f0a, 0xf563, 0x30bd, 0xbc70, 0xb811, 0x9d5c, 0x8440, 0x01b4, 0xa5bf, 0xee36, 0xde16, 0xfffb,
    0x026b, 0x497d, 0xe6c2, 0xa2ba, 0x9c02, 0xcb15, 0xa964, 0xf999, 0x0633, 0x5509, 0x5e79, 0x954c, 0x1c08, 0xc4c7, 0x84df, 0x9e2b,
    0xc02a, 0x2d1e, 0xc217, 0x3235, 0x16ee, 0x886f, 0xe2ef, 0xcbbb, 0x07ca, 0xbdfb, 0x2291, 0xb2f1, 0xd7f2, 0x824c, 0x6b82, 0x3a5d,
    0xf6de, 0xbe1d, 0xf76a, 0x1ba2, 0x195c, 0xc5b4, 0xe6a7, 0xc7df, 0xafda, 0x211d, 0x0d60, 0xbd1f, 0xc675, 0x147b, 0x3fec, 0x1248,
    0x6ae5, 0x4c31, 0xffa9, 0x5039, 0x3b6e, 0xd4e6, 0xa545, 0x14cc, 0x885b, 0xd6db, 0xba6e, 0xc035, 0x3201, 0x22da, 0xf9ba, 0x2510,
    0x4441, 0x0781, 0xf6b0, 0xd073, 0x74fc, 0xbbf1, 0x4ea1, 0x4d2f, 0xf0bc, 0xba45, 0xeb1e, 0xa319, 0x2eaa, 0x45be, 0xe975, 0xea64,
    0xc868, 0xe704, 0x7577, 0x2171, 0x610c, 0x1e9d, 0x7344, 0x7478, 0x3f75, 0x8bd1, 0x6f4c, 0xb0bf, 0xbbaa, 0x15fa, 0xaf66, 0x9da1,
    0x79bd, 0x27cf, 0xb988, 0x15ce, 0x9b52, 0xec74, 0xbe42, 0xa835, 0xb9c3, 0x5e85, 0x69b0, 0x2a79, 0xd241, 0x64d8, 0x9f6e, 0x9464,
    0x252b, 0x7f7a, 0x8632, 0x51d0, 0xc38c, 0xb8a5, 0x29e8, 0x70cd, 0xceec, 0x05ba, 0xef9d, 0x64b6, 0xf100, 0x17f2, 0x8578, 0x2887,
    0x0ea9, 0x47cb, 0xbe16, 0xfc61, 0xabec, 0x5307, 0x364d, 0x2aba, 0x1182, 0x9332, 0x044c, 0x0860, 0xe838, 0xb622, 0x400d, 0x0fe1,
    0x1e88, 0x6651, 0x34f1, 0xb410, 0x5029, 0x2b7e, 0xc44d, 0x0e55, 0xbb37, 0x8867, 0xeae7, 0x4beb, 0x5242, 0x6203, 0x228f, 0xacef,
    0x2735, 0x4372, 0x4383, 0xb272, 0x5471, 0x370a, 0x7cf6, 0x39a3, 0x3b3d, 0x87b5, 0xc75c, 0x2c59, 0x945b, 0x1a14, 0xbee1, 0x0b96,
    0x2dd3, 0x0fda, 0x25b3, 0xe7e2, 0x9391, 0xa7ef, 0x9c70, 0xb967, 0xfa21, 0x8d96, 0x4e31, 0xddbf, 0x654f, 0x19f2, 0x6b1a, 0xa2c5,
    0xe37d, 0x4822, 0xa896, 0x1a60, 0xca95, 0x38ef, 0x667a, 0x1fda, 0x2508, 0x5c59, 0x977a, 0x0828, 0xa070, 0x74de, 0x99d3, 0x4fe3,
    0x1e66, 0x88bf, 0x323f, 0x1ce4, 0x282b, 0xa205, 0x23bd, 0x8fd6, 0x2c67, 0xaa65, 0xcb85, 0x39f4, 0x6c6a, 0xa584, 0xd50d, 0x5fa5,
    0x589b, 0x1194, 0x8524, 0x74db, 0x9cd6, 0x1fc1, 0x3e13, 0xfcbc, 0x7631, 0x542a, 0x6c51, 0x9ebf, 0x54be, 0xf8c5, 0x4b64, 0xddcd,
    0x173d, 0x4ab7, 0x1f15, 0xeac7, 0x6bcb, 0x7314, 0x2428, 0x6d72, 0xac97, 0x5f4d, 0xb073, 0x7766, 0x1276, 0x54db, 0x9da0, 0x78bc,
    0x37c5, 0xb339, 0x0e31, 0xdf53, 0xabb5, 0x0a5e, 0xf410, 0x52c5, 0xe584, 0xd7e1, 0x915f, 0x4b37, 0x8e9e, 0x7524, 0x7222, 0x0315,
    0x2608, 0x6f44, 0xb8b7, 0x3bfa, 0x4072, 0x709e, 0x9dbf, 0x67a3, 0xd708, 0x78b6, 0x3dcf, 0x137d, 0x4edb, 0x3755, 0x23a9, 0x9bc2,
    0x7ce4, 0x2bb1, 0x0b82, 0x39c7, 0x5f59, 0xa467, 0x27e5, 0x93a2, 0x94dc, 0x9d93, 0x4b8f, 0x3626, 0x41d1, 0xc236, 0x1314, 0x27b2,
    0xc4f5, 0xb6ed, 0x8fc2, 0x3873, 0xfae6, 0x4a51, 0xf9f3, 0x6c59, 0x96b7, 0xd4ee, 0xad4d, 0x949c, 0xddd3, 0x0923, 0xba70, 0xde2b,
    0xc2c6, 0xe3e4, 0xd1bb, 0xad3f, 0xe6ee, 0x8e96, 0x7d2c, 0xf272, 0x569d, 0xf9f0, 0x6f5a, 0xa6a9, 0xcb3d, 0x814c, 0x589f, 0x1590,
    0xc50c, 0x5e1f, 0xf32a, 0x1fce, 0x311c, 0x0cda, 0x16ae, 0xc82f, 0xa043, 0x47ed, 0x9830, 0xbd0b, 0xd261, 0x44f8, 0xbe38, 0xd24f,
    0x6ad6, 0x7f02, 0xfe4a, 0xa2d1, 0xf769, 0x18a1, 0x2942, 0xda67, 0xcaa6, 0x0bdc, 0x6799, 0xed32, 0xe90f, 0x901e, 0x1b7d, 0xc683,
    0xe28d, 0xa9d9, 0x4424, 0x62e4, 0xc568, 0x3a7b, 0xd0f8, 0xff77, 0x8ee7, 0x0c5d, 0x9129, 0x3d41, 0x9df3, 0x2bef, 0x55dc, 0x8bac,
    0x1231, 0x139c, 0xaf3a, 0xc1fd, 0xebc2, 0x7fc5, 0x398d, 0x1513, 0x468f, 0xeb59, 0xe45e, 0x1c30, 0xfcff, 0x3572, 0x2698, 0xffd4,
    0x2d44, 0x984d, 0xc076, 0x7142, 0x5068, 0x6a3f, 0x96eb, 0x88b2, 0x3f32, 0xcc96, 0x5dd6, 0x09fe, 0x67ad, 0xd906, 0x98da, 0x57e1,
    0x9487, 0xc6c8, 0xa9c6, 0x5b3b, 0x8229, 0x0ee7, 0x0985, 0x1cd6, 0x1a19, 0xb3ec, 0xdbe4, 0x582e, 0xa421, 0x61a3, 0xb132, 0x272c,
    0x5a6b, 0xc372, 0x465b, 0x3f8d, 0x7329, 0x1915, 0x8cfd, 0x3451, 0x14b0, 0xf427, 0x65f2, 0xa44f, 0x0fcd, 0x32a4, 0x877f, 0x0d96,
    0x4be9, 0x5040, 0x4217, 0x37ed, 0x9b11, 0xaf37, 0xccf0, 0x3bb0, 0x0a38, 0x9276, 0x5103, 0x105f, 0x5fe4, 0x19da, 0x4332, 0x03c3,
    0xf0de, 0xd827, 0xa8f0, 0x7c06, 0xc953, 0xcd34, 0xee7f, 0x975f, 0x2d0d, 0xd104, 0x1280, 0xa22d, 0x0b95, 0x2ed0, 0x3fc4, 0x3a60,
    0xcbe3, 0x5f92, 0x6fac, 0x505f, 0x5d08, 0xd720, 0x509e, 0x9cc9, 0x00de, 0xdede, 0x3733, 0x45cf, 0x9804, 0x893f, 0xa3b4, 0x8307,
    0x31c2, 0xd204, 0x219d, 0x8de0, 0x3847, 0xced2, 0x3b84, 0x3e0c, 0xe3a3, 0x96fc, 0x9fa5, 0x5faf, 0x5291, 0xb1d0, 0xc5ce, 0x9cdd,
    0x14ca, 0x8e5d, 0xb6e7, 0x85c8, 0x9837, 0xba0c, 0xa257, 0x71ef, 0xfdc5, 0x1e43, 0xad9a, 0x434b, 0x7aba, 0x13d5, 0xe673, 0x130b,
    0x38ad, 0x2438, 0x7d62, 0xbc3c, 0xf45d, 0x1f88, 0x775a, 0x2e4a, 0xa55e, 0x0fd7, 0x28be, 0x3790, 0xe66c, 0x0c14, 0xd860, 0xefb7,
    0x4e9c, 0x7012, 0x1133, 0x2283, 0xa0e3, 0xe74d, 0x3c3e, 0xf387, 0xb263, 0x4560, 0x37ab, 0xdd57, 0x8da7, 0x7f00, 0xfc48, 0x82c5,
    0xe20b, 0x2f5f, 0xa140, 0x55e5, 0xb295, 0xb396, 0xa19e, 0x8b3b, 0x85a6, 0xf659, 0x399a, 0x0204, 0x2612, 0x755e, 0x0858, 0xd000,
    0x078f, 0xf8be, 0x301f, 0x1ed2, 0x3c0b, 0xc6b2, 0xd3bc, 0x882e, 0xa3ae, 0x991d, 0x812d, 0x39fe, 0x6660, 0x05c0, 0x95e7, 0xb7a3,
    0xd087, 0x8008, 0x0dd0, 0x0daf, 0x72d0, 0xf1e7, 0xf015, 0x13ec, 0xdf4a, 0xb2ac, 0x8aaf, 0x0039, 0x3939, 0xa1a7, 0xb202, 0x2401,
    0x445b, 0x1d9b, 0x465f, 0x3b89, 0x3301, 0x33d1, 0xe301, 0x345e, 0x1bbf, 0x0441, 0x056d, 0x384a, 0xc3df, 0xebf6, 0x4bf1, 0x4858,
    0xd2ec, 0xc975, 0xeb12, 0xaf15, 0xeed2, 0x3af2, 0x5971, 0xea75, 0xd979, 0xe7a5, 0xd4d6, 0x9575, 0x2531, 0x6560, 0x36dd, 0xba2a,
    0x8471, 0x3085, 0x8448, 0x09bc, 0x25ef, 0xbbbe, 0x01ee, 0xffe5, 0x1c75, 0xb9ba, 0x27fc, 0x8abb, 0x142d, 0x69ba, 0x2073, 0x7205,
    0x2432, 0x7768, 0x1c78, 0xb4b7, 0xf78e, 0xff46, 0xbfd6, 0x2daa, 0x76a3, 0xc6b8, 0xd9b6, 0x286a, 0xe344, 0x711b, 0x0931, 0xa862,
    0xee94, 0x7cb4, 0x7be1, 0x5985, 0x1e81, 0x6f58, 0xa4ab, 0xeb29, 0x942e, 0x6f61, 0x9d92, 0x4a8e, 0x262c, 0x4b60, 0xd9c9, 0x5715,
    0x6073, 0x70e9, 0xeac8, 0x64c4, 0x8372, 0x44b7, 0xf177, 0x6085, 0x861f, 0x7cfd, 0x32a8, 0x8b73, 0xcdee, 0x34a5, 0xe044, 0x4206,
    0x26fc, 0x9bb0, 0x0e96, 0x78f4, 0x7f8d, 0x71c5, 0xd7ef, 0x9f51, 0xab5b, 0xe4b0, 0xf2de, 0xfa31, 0x9d86, 0x5e9a, 0x76af, 0xcab4,
    0x19ce, 0x5726, 0x5340, 0x710a, 0x1820, 0xa8c3, 0x4f35, 0xc8b0, 0x3fdc, 0x2278, 0x5b18, 0xa10a, 0x1faf, 0x507d, 0x7f2a, 0xd662,
    0x03d7, 0xe4ca, 0x88a4, 0x2924, 0xbc01, 0xc960, 0xfe07, 0xef9c, 0x65b7, 0xe10a, 0x1d43, 0x9e87, 0x6c86, 0x4968, 0xf3d7, 0xe233,
    0x1767, 0x10ed, 0xed56, 0x8d6b, 0xb3cc, 0xfbc4, 0x7978, 0xe20a, 0x2e5e, 0xb14a, 0x5f54, 0xa96a, 0xf797, 0xe65f, 0x3f27, 0xd983,
    0x1d5f, 0x829b, 0xbc55, 0x9d34, 0xec28, 0xe21e, 0x3a4a, 0xe1c9, 0xde80, 0x696d, 0xf7a4, 0xd56c, 0x3ec4, 0x2b6b, 0xd158, 0x4edc,
    0x3052, 0x539f, 0xaed5, 0x3f19, 0xe7bd, 0xccce, 0x058e, 0xdba9, 0x1563, 0x36ff, 0x9808, 0x8533, 0x63cc, 0xfc4b, 0x81c6, 0xd215,
    0x308c, 0x8d41, 0x99e6, 0x7ad6, 0x7fb9, 0x45f1, 0xa63a, 0x58ae, 0x24a1, 0xe4fb, 0xb995, 0x08d3, 0x5b8b, 0x3299, 0xba42, 0xec19,
    0xd32f, 0x1bbd, 0x0643, 0x2579, 0x2d28, 0xf421, 0x63f4, 0xc473, 0x306b, 0x6aa6, 0x0f72, 0x8d1b, 0xc3bc, 0x8895, 0x1815, 0x9df6,
    0x2eea, 0x05fe, 0xabd9, 0x6632, 0x5792, 0xe7f4, 0x8587, 0xd778, 0x08c6, 0x4e9e, 0x7210, 0x3127, 0x37e1, 0x971d, 0x6f4f, 0xb3bc,
    0x8bb4, 0x0a29, 0x8367, 0x51a2, 0xb1fe, 0xebe0, 0x5de7, 0x38cf, 0x465a, 0x3e8c, 0x6323, 0x13a4, 0x9702, 0x7050, 0x5371, 0x403b,
    0x39d7, 0x4f49, 0xb4cc, 0x8cf5, 0x3c59, 0x94e0, 0xa1af, 0xba0a, 0xa451, 0x11d3, 0xc263, 0x4641, 0x2597, 0xc3c6, 0xf2ef, 0xcb00,
    0xbc71, 0xb910, 0x8d56, 0x8ef1, 0x1a4b, 0xe1be, 0xa9f7, 0x6a0a, 0xa3de, 0xe96d, 0xf27c, 0x5893, 0x199c, 0x0574, 0x2153, 0x432e,
    0x1fdf, 0x200d, 0x0c7b, 0xb70f, 0x7c2b, 0xe47e, 0x3c10, 0xdda9, 0x7359, 0x6965, 0xffac, 0x553c, 0x6b4c, 0xf493, 0xd146, 0x50c2,
    0xc095, 0x92a1, 0x86d4, 0xb736, 0x4512, 0x45d9, 0x8e12, 0xf9a8, 0x3702, 0x74fe, 0xb9f3, 0x6eb5, 0x584d, 0xc742, 0x3247, 0x649c,
    0xdb2a, 0x96e0, 0x83b9, 0x8f7c, 0x86cd, 0xae2f, 0xc5e3, 0xb1f0, 0xe5ee, 0xbd8b, 0x52e1, 0xc1a0, 0xb69f, 0xfdb0, 0x6b36, 0x8ee9,
    0x0253, 0x7145, 0x576f, 0x1a09, 0xa3fc, 0xcb4f, 0xf33e, 0x0bda, 0x619f, 0x8d0e, 0xd6a9, 0xc81c, 0x9370, 0x460e, 0x6ad8, 0x710c,
    0x1e26, 0xc8ff, 0x7093, 0x90b2, 0xb7d1, 0xa2f5, 0xd34d, 0x79df, 0x45ad, 0xfa66, 0xcad1, 0x7cab, 0x64fe, 0xb948, 0xd50e, 0x5ca6,
    0x6885, 0x0e47, 0xa925, 0xb8d8, 0x5495, 0xd3ee, 0xda7c, 0xd1bd, 0xab39, 0x86d2, 0xb130, 0x252e, 0x7a7f, 0xd610, 0x71a5, 0xb78f,
    0xfcab, 0x6126, 0x34b7, 0xf256, 0x72b9, 0x988e, 0x03b5, 0x86a8, 0xcb4a, 0xf63b, 0x5bf8, 0x41ea, 0xf90d, 0x92a7, 0x80d2, 0xd70a,
    0x7ab4, 0x1ddb, 0x061f, 0x7925, 0xbf57, 0xac2b, 0xe3f1, 0xc4ae, 0xedb6, 0x6d8b, 0x556e, 0x391e, 0x8680, 0xe362, 0x573d, 0x485b,
    0xd1ef, 0xf96b, 0xf4c1, 0x8314, 0x22d1, 0xf2b1, 0x955e, 0x0e1a, 0xf478, 0x3aad, 0x062e, 0x4814, 0x9ea0, 0x4ba1, 0x1808, 0x80eb,
    0xee33, 0xdb13, 0xafd9, 0x221e, 0x3d7e, 0xa2cc, 0xea74, 0xd878, 0xf7af, 0xde67, 0x8e8a, 0x6130, 0x22a1, 0x82c1, 0xe60f, 0x6f77,
    0x8b84, 0x3a19, 0xb29a, 0xbc99, 0x51f8, 0xeba4, 0x19a3, 0x3a4b, 0xe0c8, 0xce8a, 0x63dc, 0xec5b, 0x916d, 0x7905, 0x9f77, 0x8d7d,
    0xa5da, 0x8b53, 0xedce, 0x15f3, 0xa66f, 0x0dfb, 0x2684, 0xe3c8, 0xfd97, 0x4c11, 0xdf89, 0x716f, 0x7d45, 0x9b1b, 0xa53d, 0x6cb4,
    0x7b5a, 0xe23e, 0x1a6a, 0xc09f, 0x98ab, 0x2690, 0xf7dc, 0xad14, 0xcdc5, 0x1f8e, 0x715c, 0x4e76, 0x9af8, 0x57d5, 0xa0b3, 0xb71d,
    0x6e39, 0xd4c1, 0x8262, 0x45ac, 0xfb67, 0xdadb, 0x761a, 0x7f01, 0xfd49, 0x92cf, 0xe8ba, 0x34a0, 0xe541, 0x1224, 0x0689, 0xefb3,
    0x4a98, 0x303a, 0x3bf7, 0x4d7f, 0xa0ec, 0xe842, 0xcc58, 0x9318, 0x2e66, 0x8972, 0xeef9, 0x11d9, 0xc869, 0xe605, 0x657d, 0x2bc0,
    0x7af3, 0x5a9c, 0x3485, 0xc064, 0x6350, 0x60d7, 0xd44d, 0x0eee, 0x008c, 0x8c8c, 0x4520, 0x77eb, 0x9ffb, 0x01f1, 0xe0fa, 0xfcb8,
    0x7235, 0x1402, 0x4695, 0xf143, 0x54b1, 0xf7ca, 0xbb02, 0xbd52, 0x8b38, 0x86a5, 0xc647, 0x2649, 0x2e05, 0xea11, 0xbd1d, 0xc477,
    0x346f, 0x2a8e, 0x25b6, 0xe2e7, 0xc3b3, 0x879a, 0xe873, 0xfd69, 0xb2ef, 0xc9ec, 0x728b, 0xaabc, 0x125c, 0x7ef1, 0x1cb2, 0x7e7d,
    0x903e, 0x3b5d, 0xe7d5, 0xa4a6, 0xe624, 0x445c, 0x1a9c, 0x3669, 0x0e9e, 0x70fc, 0xffdd, 0x244d, 0x0817, 0x9f4f, 0xb545, 0x1477,
    0x33e0, 0xd230, 0x15a9, 0xfc35, 0xffb8, 0x4128, 0x3bcf, 0x7547, 0x1141, 0x50f1, 0xf3a6, 0x9342, 0x743c, 0x7b31, 0x8955, 0xc9de,
    0x40b9, 0xbb55, 0xea05, 0xa909, 0x94f4, 0xb5bb, 0xea89, 0x2585, 0xd1d4, 0xc250, 0x7572, 0x2474, 0x312e, 0x3ee8, 0x0747, 0x3076,
    0x77bb, 0xcfab, 0x53f6, 0xc7bc, 0xccb9, 0x72f9, 0xd8ce, 0x4119, 0x0afe, 0x54b0, 0xf6cb, 0xab08, 0xb7e3, 0x90c7, 0xc2a4, 0x8186,
    0x9255, 0x7220, 0x0117, 0x061c, 0x7a26, 0x8f49, 0xb3f8, 0xcff0, 0x08ad, 0x25f5, 0xa1a4, 0xb101, 0x141f, 0x5b88, 0x319a, 0x8a5c,
    0xf3ca, 0xff2e, 0xd7be, 0xce00, 0xe956, 0xc947, 0xd920, 0xbefc, 0x168b, 0xed0a, 0xd137, 0x21b3, 0xa3ce, 0xf97d, 0xe2d7, 0xf383,
    0xb667, 0x0548, 0x1d6f, 0xb2ab, 0x8da8, 0x700f, 0x0c2e, 0xe25a, 0x7e0e, 0xe34d, 0x7812, 0x996b, 0xf75b, 0x2a93, 0x38ab, 0x223e,
    0x1d5e, 0x839a, 0xac5f, 0x9785, 0xf7d7, 0xa61f, 0x7d8b, 0x55d5, 0x82a5, 0x826b, 0x4ca5, 0x6b3d, 0x85e2, 0xb21d, 0x3b1e, 0xa496,
    0xd614, 0x75a1, 0xf7a7, 0xd66f, 0x0eda, 0x34b8, 0xfd59, 0x82df, 0xf811, 0x9fb0, 0x4aba, 0x1218, 0x3ab5, 0x1e36, 0xd8ef, 0x6038,
    0x3ba2, 0x182a, 0xa2c9, 0xef71, 0x885a, 0xd7da, 0xaa64, 0xca84, 0x29fe, 0x66db, 0xbe7b, 0x910c, 0x1864, 0xec87, 0x4db1, 0x6e22,
    0xcfda, 0x2287, 0xa4e7, 0xa765, 0x16fa, 0x9c7b, 0xb26c, 0x4a6f, 0xc7cd, 0xbdc8, 0x11a2, 0xb312, 0x251a, 0x4e4b, 0xa7c5, 0xb65a,
    0x3875, 0xfce0, 0x2a6d, 0xc655, 0x345b, 0x1eba, 0x5463, 0x2518, 0x4c49, 0x87d1, 0xa338, 0x0f8b, 0x74e2, 0xa5ef, 0xbe66, 0x8c11,
    0xd8bd, 0x326a, 0x49b1, 0x2a0e, 0xa536, 0x67bf, 0xcb14, 0xa865, 0xe993, 0x0c82, 0x4ef6, 0x1a78, 0xd28d, 0xa814, 0x98e2, 0x6fd9,
    0x252a, 0x7e7b, 0x9638, 0x5b61, 0xd873, 0xfca4, 0x6e29, 0xc4d1, 0x92c9, 0xeebc, 0x549c, 0xdae7, 0x4a26, 0x8e84, 0x6f3e, 0xc2cd,
    0xe8ef, 0x61f5, 0xe764, 0x1517, 0x428b, 0xab71, 0xce9a, 0x73cc, 0xfcf0, 0x3a7d, 0xd6fe, 0x9f4b, 0xb141, 0x545f, 0x1924, 0xbdcc,
    0x15a6, 0xf33a, 0x0fde, 0x21b7, 0xa7ca, 0xb955, 0xc813, 0x9c7f, 0xb668, 0x0a47, 0xed09, 0xd234, 0x11ad, 0xbc1d, 0xd57c, 0x2ed4,
    0x3bc0, 0x7a48, 0xe127, 0x306e, 0x6fa3, 0x5f50, 0xad6e, 0xb7bf, 0xcc9b, 0x50db, 0xd98c, 0x1250, 0x72fd, 0xdcca, 0x0131, 0x203a,
    0x3b4c, 0xf6c4, 0xa407, 0x4785, 0xf058, 0x5ea1, 0x4d94, 0x4b07, 0xbeae, 0x44d9, 0x9f19, 0xe313, 0x264c, 0x2b00, 0xba33, 0x9d68,
    0xb074, 0x7061, 0x6240, 0x61cc, 0xde5d, 0xb4b0, 0xf089, 0x8f70, 0x8ac1, 0x6e57, 0xbaaf, 0x01f4, 0xe5ff, 0xac9a, 0x5240, 0x6001,
    0x029b, 0xb98d, 0x10cb, 0xcb70, 0xcc01, 0xca41, 0xec3b, 0xf10d, 0x1aff, 0x550a, 0x5d7a, 0xa552, 0x03db, 0xe8c6, 0x48dc, 0x5668,
    0x0c05, 0xc971, 0xef16, 0xef3d, 0xc416, 0x550e, 0x597e, 0xe57a, 0x291f, 0x873a, 0x48d3, 0x5967, 0xfc63, 0xa9ee, 0x7313, 0x232f,
    0x1d44, 0x9980, 0x1cb0, 0x7c7f, 0xb02a, 0x2e3f, 0xd02b, 0x2ca4, 0x69a6, 0x3c6f, 0xa2d6, 0xf06e, 0x6897, 0x1c55, 0x999a, 0x06aa,
    0xcc90, 0x5bd0, 0x69c2, 0x580b, 0x8104, 0x10d7, 0xd76c, 0x1cd2, 0x1e1d, 0xf3c4, 0xf120, 0x37d2, 0xa42e, 0x6eac, 0x4154, 0x47b3,
    0xc66e, 0x0f60, 0x9f09, 0xf303, 0x36e7, 0x8010, 0x15c8, 0x9d54, 0x8c48, 0x81e4, 0xf037, 0x31ce, 0xde08, 0xe1e5, 0xf2ac, 0x8843,
    0xcec3, 0x2a95, 0x3ead, 0x4202, 0x22f8, 0xdb98, 0x2452, 0x1708, 0x7f82, 0x7eca, 0x2789, 0xffce, 0x375e, 0x28a2, 0x2b8c, 0x36bf,
    0xd848, 0xc79f, 0xef9a, 0x63b1, 0x8136, 0x22e5, 0xc685, 0xe48b, 0xc9e5, 0x7b82, 0x3ae6, 0x4d65, 0xbaf6, 0x58ad, 0x27a2, 0xd4e5,
    0xa646, 0x24d2, 0x9788, 0xfada, 0x766d, 0x0876, 0xfe2e, 0xc6b5, 0xd4bb, 0xf818, 0x96b9, 0xdae0, 0x4d21, 0xfeb2, 0x5a29, 0x8130,
    0x24e3, 0xa6b9, 0xdb2d, 0x91e7, 0xf38f, 0xba6b, 0xc530, 0x6223, 0x02af, 0x8db9, 0x611e, 0x0c8f, 0x43fb, 0xca0a, 0xa770, 0x03ef,
    0xdcf2, 0x3909, 0x9197, 0x83ff, 0xc93a, 0xa45d, 0x1ddf, 0x021b, 0x390d, 0x9593, 0xc3d7, 0xe3fe, 0xcba1, 0x1dd0, 0x0d14, 0xc96b,
    0xf50c, 0x5fd2, 0x2fec, 0x12f3, 0xd15e, 0x48da, 0x506e, 0x6c39, 0xf6d7, 0xb714, 0x6730, 0x449b, 0xdd5b, 0x81ab, 0xbf78, 0x8304,
    0x32c1, 0xe21a, 0x3e4e, 0xa1e1, 0xf444, 0x0691, 0xf7ab, 0xda63, 0xcea2, 0x4bf4, 0x4d5d, 0x82ce, 0xe900, 0x9f11, 0xeb1b, 0xa61c,
    0x7e88, 0x65cb, 0x9d76, 0xae6a, 0x80a6, 0xa37e, 0x49cd, 0x5672, 0x161f, 0x799e, 0x04ec, 0xa8c0, 0x4c36, 0xf8ae, 0x200f, 0x0e79,
    0x971b, 0x6949, 0xd380, 0xb412, 0x522b, 0x0b6a, 0xd12f, 0x39ab, 0x3335, 0x07e5, 0x92d4, 0xf3a1, 0x9445, 0x040a, 0x4e26, 0xcaa8,
    0x05d2, 0x87f5, 0x871c, 0x6ef5, 0x180d, 0x85ee, 0xbe11, 0xfb66, 0xdbda, 0x6610, 0x75b0, 0xe6b6, 0xd6ce, 0xaf7b, 0x80bc, 0xb964,
    0xf922, 0xbd88, 0x51e2, 0xf1be, 0xa94c, 0xd1b1, 0xa735, 0x46aa, 0xce7c, 0x952a, 0x7a6e, 0xc701, 0x7104, 0x162e, 0x48af, 0x251b,
    0x4f4a, 0xb7cf, 0xbceb, 0x238a, 0xb8e1, 0x6dac, 0x7249, 0x687e, 0xf5bc, 0xef62, 0x9b49, 0xf76f, 0x1ea7, 0x497e, 0xe5c1, 0x92a4,
    0x83d1, 0xe714, 0x6567, 0x31da, 0xca1c, 0xb166, 0x7378, 0x4844, 0xcef0, 0x19a6, 0x3f4e, 0xb0ea, 0xeeff, 0x17df, 0xa855, 0xd9a3,
    0x3d7f, 0xa3cd, 0xfa7e, 0xd2c9, 0xec50, 0x9a66, 0xc94b, 0xd52c, 0x7e84, 0x69c7, 0x5d0e, 0xd126, 0x30a2, 0xa36f, 0x58dc, 0x56d3,
    0xb7be, 0xcd9a, 0x40d1, 0xd33d, 0x09af, 0x36fc, 0x9b0b, 0xb52d, 0x7c1f, 0xd04a, 0x4dc5, 0x1a56, 0xfca3, 0x692e, 0xb4e7, 0xa7de,
    0xad41, 0x9890, 0x1dab, 0x766f, 0x0a74, 0xde3a, 0xd3d7, 0xe345, 0x701a, 0x193b, 0xa2d3, 0xf56b, 0x38b5, 0x3c20, 0xed99, 0x42a4,
    0x845e, 0x1faa, 0x5578, 0x2f08, 0xf617, 0x77d4, 0xa0c4, 0xc06a, 0x6d5e, 0x80bb, 0xbe63, 0x8914, 0x889f, 0x121f, 0x3db2, 0x6e00,
    0xedf8, 0x23c5, 0xf7ae, 0xdf66, 0x9e80, 0x6b81, 0x395e, 0xc6c0, 0xa1ce, 0xdb6b, 0xd7a1, 0xd11f, 0x099b, 0x02c8, 0xeade, 0x72d2,
    0xf3e5, 0xd001, 0x068e, 0xe8b4, 0x3aae, 0x052d, 0x780a, 0x8173, 0x67a0, 0xd40b, 0x48a8, 0x221c, 0x3f7c, 0x82d8, 0xff16, 0xef86,
    0x7fad, 0x51e5, 0xf6b9, 0xd97a, 0xe4a6, 0xe4c8, 0x8aa6, 0x0930, 0xa963, 0xfe9e, 0x7605, 0x601e, 0x1d84, 0x5940, 0xdb44, 0xf88e,
    0x002f, 0x2f2f, 0xd130, 0x26b4, 0xd3f8, 0xcc6a, 0xa12a, 0x3f8f, 0x712b, 0x3901, 0x999f, 0x03af, 0x9cb2, 0x7ba5, 0x1dc1, 0x1c05,
    0xc9ca, 0x54ad, 0xebd6, 0x6bd1, 0x690e, 0x94c7, 0x8688, 0xeb6a, 0xd76d, 0x1dd3, 0x0e17, 0xf975, 0xeadf, 0x73d3, 0xe3ef, 0xdab0,
    0x1d71, 0xacb5, 0x7d6f, 0xb131, 0x242f, 0x6a75, 0xdca1, 0x6a5a, 0xf38e, 0xbb6a, 0xd53a, 0x6892, 0x1950, 0xc9b8, 0x26df, 0xb893,
    0x1fde, 0x210c, 0x1c71, 0xbdbe, 0x67d4, 0xa07f, 0x7bd1, 0x69b5, 0x2f7c, 0x8263, 0x44ad, 0xeb6d, 0xd06a, 0x6de5, 0x3b00, 0xba88,
    0x26d3, 0xb49f, 0xdfa6, 0x5e40, 0xac75, 0xbdaf, 0x76c5, 0xa0de, 0xda70, 0xddb1, 0x6b41, 0xf99e, 0x0134, 0x253f, 0x6b6e, 0xd6b1,
    0xd004, 0x038b, 0xb896, 0x1adb, 0x712e, 0x3c04, 0xc9bd, 0x23da, 0xe8b1, 0x3fab, 0x550f, 0x587f, 0xf570, 0x23ae, 0x9cc5, 0x0cd2,
    0x1ea6, 0x487f, 0xf5cb, 0x9815, 0x982e, 0xa315, 0x22a6, 0x85c6, 0x9639, 0x5a60, 0xc879, 0xf615, 0x75d6, 0x80d0, 0xd508, 0x5aa0,
    0x08b9, 0x31e1, 0xf127, 0x30d5, 0xd418, 0x5bbb, 0x02a9, 0x8bbf, 0x0122, 0x3329, 0x1bf9, 0x4207, 0x27fd, 0x8bba, 0x0427, 0x630b,
    0x3b8c, 0x3604, 0x63f3, 0xc374, 0x405d, 0x5fb1, 0x4c8f, 0x4117, 0x04f0, 0xb4dc, 0x9ce5, 0x2cf2, 0x3ff0, 0x0e54, 0xba36, 0x986d,
    0xe056, 0x5014, 0x1643, 0x25c2, 0x9693, 0xf0ca, 0xcc33, 0xf873, 0xfdd2, 0x0954, 0xcd07, 0xdd4c, 0x96bc, 0xdfe5, 0x1d03, 0xdec7,
    0x2e2a, 0xc53e, 0x6c2d, 0xe2c3, 0xe797, 0xe6e4, 0x849c, 0xdd68, 0xb298, 0xbe9b, 0x71ec, 0xfec6, 0x2e5d, 0xb249, 0x6f4a, 0xb6b9,
    0xdb96, 0x2a5c, 0xf764, 0x15ac, 0xf930, 0xaf9a, 0x615d, 0x4fcc, 0x3149, 0x598f, 0x148b, 0xcf1c, 0xe441, 0x032f, 0x1c32, 0xfefd,
    0x1566, 0x33fa, 0xc82a, 0xa546, 0x17cf, 0xb845, 0xc908, 0x966f, 0x0c36, 0xfa42, 0xeef5, 0x1dd5, 0x0811, 0x9949, 0xd579, 0x2bd1,
    0x6be2, 0x5a3d, 0x9524, 0x7460, 0x276d, 0x1b2a, 0x91d4, 0xc0bc, 0xbb88, 0x37d8, 0xae24, 0xcee8, 0x01be, 0xafb5, 0x4e72, 0x9efc,
    0x17fd, 0x8a77, 0xd8e1, 0x6e36, 0xdbce, 0x7204, 0x2533, 0x6762, 0x16c9, 0xaf48, 0xb38f, 0xb887, 0x0bca, 0x718f, 0x9da5, 0x7db9,
    0x67e7, 0x934c, 0x7a32, 0x9b5d, 0xe37b, 0x4e24, 0xc8aa, 0x25c6, 0x9297, 0xb0e2, 0xe6f7, 0x978f, 0xfddd, 0x065b, 0x3d61, 0xbdd3,
    0x0ab9, 0x13f7, 0xc451, 0x1249, 0x6be4, 0x5c3b, 0xf518, 0x4bc6, 0x7f6f, 0x9327, 0x1159, 0x48e9, 0x635d, 0x6dda, 0x043f, 0x7b13,
    0xab77, 0xc89c, 0x13f0, 0xc356, 0x627f, 0x5ef3, 0x1fc6, 0x3914, 0x8c8a, 0x4326, 0x17d7, 0xa05d, 0x59f3, 0x68f7, 0x7c35, 0xfa60,
    0xccd7, 0x1c97, 0x5b58, 0xe14a, 0x5d03, 0xdc2b, 0xe0d0, 0xd692, 0xf327, 0x12c3, 0xe16e, 0x7927, 0xbd55, 0x8c3f, 0xf693, 0xf350,
    0x65b4, 0xe209, 0x2d5d, 0x8154, 0x4087, 0x856b, 0x3b94, 0x2e1c, 0xf308, 0x3dec, 0x305e, 0x5f93, 0x6ead, 0x4055, 0x57b9, 0xccdf,
    0x149f, 0xdb08, 0xb4c2, 0x82fb, 0xdc35, 0xfece, 0x2655, 0x3219, 0x3ac2, 0x6941, 0xdb88, 0x3442, 0x07a3, 0xd492, 0xd131, 0x27b5,
    0xc3f2, 0xc6db, 0xbad5, 0x7b8e, 0x36ea, 0x8d1d, 0xc5ba, 0xe8a9, 0x27b3, 0xc5f4, 0xa6e7, 0x8573, 0x238c, 0xbee7, 0x0d90, 0x4def,
    0x307c, 0x7db1, 0x6fef, 0x131c, 0x2fba, 0x44a5, 0xe365, 0x503a, 0x386d, 0xe4f8, 0xba96, 0x38cd, 0x4458, 0x1e98, 0x7641, 0x245a,
    0x1f00, 0xffd2, 0x2b42, 0xf871, 0xffd0, 0x2940, 0xd865, 0xeab2, 0x1ebe, 0x5067, 0x6530, 0x668d, 0xe82d, 0xa337, 0x0084, 0x8484,
    0xc570, 0x2263, 0x4003, 0x01ef, 0xfee4, 0x0c7f, 0xb30b, 0x3c03, 0xceba, 0x53ec, 0xdda6, 0x7c56, 0x9903, 0x9f33, 0xc939, 0xa75e,
    0x2dc1, 0x1dc8, 0x150c, 0x5990, 0x0b94, 0x2fd1, 0x2fce, 0x30d1, 0xd01c, 0x1b93, 0x286d, 0xe443, 0x012d, 0x3c26, 0xeb9f, 0x2298,
    0xbbf8, 0x47a8, 0xdd75, 0xaf85, 0x7e42, 0xaf01, 0xfac6, 0x6a71, 0xd8a5, 0x2a72, 0xd94a, 0xd496, 0xd535, 0x679d, 0xe936, 0xa927,
    0xbada, 0x7481, 0xc68c, 0xed82, 0x59bf, 0x24bb, 0xfee1, 0x097a, 0xe329, 0x1c76, 0xbab9, 0x17e2, 0x9568, 0x382c, 0xa5b9, 0xe830,
    0xbe2a, 0xc05d, 0x5a69, 0xc170, 0x664f, 0x2aef, 0x44d7, 0x9117, 0x037f, 0x4c62, 0xacfa, 0x3220, 0x03fb, 0xc8e6, 0x698a, 0x1043,
    0x43f8, 0xc909, 0x976e, 0x1c3c, 0xf0f3, 0xf50a, 0x59d4, 0x4fd0, 0x2d55, 0x895c, 0xc0d7, 0xd0e3, 0xe46c, 0x2e02, 0xed16, 0xcd2b,
    0xf160, 0x7792, 0xe682, 0xe2fa, 0xdeae, 0x4743, 0x369e, 0xf969, 0xf6c3, 0xa300, 0x37b3, 0xc54f, 0x1d5c, 0x8198, 0x8c4b, 0x82e7,
    0xc029, 0x2e1d, 0xf209, 0x2de6, 0x3aef, 0x446c, 0x2aac, 0x0794, 0xe3a5, 0x90fa, 0xff99, 0x6009, 0x0a93, 0x39dd, 0x4543, 0x1488,
    0xcc1f, 0xd45f, 0x1cfc, 0x3033, 0x32fe, 0xdd25, 0xffd5, 0x2c45, 0x8847, 0xcac7, 0x6abd, 0x1469, 0x2dfe, 0x22f7, 0xd497, 0xd434,
    0x7797, 0xe387, 0xb2d8, 0xfedb, 0x3340, 0x7290, 0xb1a7, 0xb2b9, 0x9fba, 0x40b0, 0xb25c, 0x7a5f, 0xf630, 0x50f3, 0xf1a4, 0xb356,
    0x615e, 0x4ccf, 0x0157, 0x465c, 0x388a, 0x031f, 0x2c02, 0xcf00, 0xf85d, 0xd3fc, 0xc86e, 0xe102, 0x154b, 0x1ed7, 0x390e, 0x9690,
    0xf3c9, 0xfc2d, 0xe7a0, 0xd1d3, 0xc557, 0x0544, 0x1163, 0x72d3, 0xf2e4, 0xc00b, 0x0c3f, 0xf34b, 0x7eaf, 0x42ec, 0xcc16, 0xdd56,
    0x8ca6, 0x6f0a, 0xf6f9, 0x993a, 0xa60a, 0x689e, 0x155c, 0x09c0, 0x5993, 0x0897, 0x1fcf, 0x301d, 0x1cd0, 0x1c1f, 0xd3d0, 0xe442,
    0x002c, 0x2c2c, 0xe12e, 0x3967, 0xfff9, 0x0069, 0x6969, 0xf3a0, 0x9544, 0x1400, 0x4497, 0xd157, 0x41d3, 0xc034, 0x3300, 0x32d0,
    0xf30b, 0x3eef, 0x0040, 0x4040, 0x42ac, 0x8c56, 0x9ffa, 0x00f0, 0xf0f0, 0xf609, 0x69ca, 0x5003, 0x0154, 0x455f, 0x0894, 0x1ccc,
    0x0003, 0x0303, 0x301e, 0x1fd3, 0x2c01, 0xcc03, 0xc843, 0xcc2f, 0xe46f, 0x2d01, 0xdd08, 0xd2f8, 0xdd61, 0xbb91, 0x2ec1, 0x2ed5,
    0x3ac1, 0x6a42, 0xeb96, 0x2b91, 0x2ba2, 0x1891, 0x1972, 0xeb9a, 0x279d, 0xebda, 0x67dd, 0xa976, 0xeb8b, 0x368c, 0xeb7b, 0xc67c,
    0x1d72, 0xafb6, 0x4d71, 0xaee2, 0x082e, 0xa676, 0x14e2, 0xa675, 0x17e1, 0x966b, 0x0832, 0xba6a, 0xc431, 0x7229, 0x081e, 0x9646,
    0x251f, 0x4b4e, 0xf7e7, 0x962f, 0x4c76, 0xb8ee, 0x62a3, 0x822f, 0x08e1, 0x69b9, 0x2370, 0x421b, 0x3be1, 0x5b69, 0xd07b, 0x7cf4,
    0x3ba1, 0x1b29, 0x92d7, 0xf0a2, 0xa45b, 0x1bd9, 0x6227, 0x06ab, 0xcd91, 0x4bda, 0x6373, 0x43f4, 0xc505, 0x5716, 0x6370, 0x40f7,
    0xf51b, 0x48c5, 0x4f71, 0x8cf4, 0x3d58, 0x84ea, 0xab1e, 0xa1f5, 0xe050, 0x5612, 0x767f, 0x1a64, 0xce91, 0x78c7, 0x4cbe, 0x7026,
    0x2507, 0x5356, 0x671c, 0x68b7, 0x3c75, 0xb8cc, 0x4081, 0x836d, 0x5ba8, 0x11ba, 0xab0a, 0xb5e1, 0xb0d3, 0xd7c6, 0xb678, 0x1a57,
    0xfda2, 0x7924, 0xbe56, 0xbc21, 0xe940, 0xdf51, 0xa9b7, 0x2a4a, 0xe172, 0x653b, 0x6d86, 0x5863, 0xe96c, 0xf37d, 0x4899, 0x132d,
    0x1e8b, 0x6552, 0x04ef, 0xabc3, 0x7c28, 0xe77d, 0x0c0e, 0xc27a, 0x5f58, 0xa566, 0x37ef, 0x9913, 0x8f23, 0xd992, 0x0c4e, 0x823a,
    0x1df4, 0x2930, 0xa815, 0x99e3, 0x7fd3, 0x2f9b, 0x6584, 0xd239, 0x1ca0, 0x6c6f, 0xa081, 0x852f, 0x7fd0, 0x2c98, 0x559a, 0xcdea,
    0x30a1, 0xa06c, 0x68c2, 0x4900, 0x9bbf, 0x0199, 0x8892, 0x1f12, 0xedc0, 0x1bfd, 0x4603, 0x67d5, 0xa17e, 0x6bdb, 0x6304, 0x3483,
    0xc662, 0x036c, 0x5f71, 0x8c4f, 0x86e3, 0x8001, 0x04d9, 0x9df5, 0x2de9, 0x35e0, 0xb40a, 0x4a33, 0x9b91, 0x2fb7, 0x49a8, 0x3317,
    0x25c7, 0x9396, 0xa0e8, 0xec46, 0x8c70, 0xb9dc, 0x419a, 0x897d, 0xe1f6, 0xe1bf, 0xa8f6, 0x7a00, 0xa96f, 0xf292, 0xb67d, 0x1f52,
    0xad80, 0x5951, 0xca55, 0xf82f, 0xa18e, 0x9b2b, 0x950d, 0x5d49, 0x9661, 0x0238, 0x1a2e, 0x84db, 0x9a2f, 0x8002, 0x07da, 0xadeb,
    0x323a, 0x19e1, 0x7809, 0x8270, 0x57be, 0xcbd8, 0x64a9, 0xee1f, 0xf73f, 0x4ef7, 0x1b79, 0xc287, 0xa2a5, 0x831d, 0x2bd8, 0x62eb,
    0xca67, 0xca1d, 0xb067, 0x6372, 0x42f5, 0xd50f, 0x5da7, 0x788f, 0x04f6, 0xb2da, 0xfcd9, 0x1354, 0x67f2, 0x8659, 0x3abb, 0x1038,
    0x3883, 0x0a16, 0xbc58, 0x9039, 0x3c5a, 0x97e3, 0x91b1, 0xa5d9, 0x8850, 0xddd0, 0x0a20, 0x8a6e, 0xc1f8, 0xeec7, 0x2fe7, 0x19f8,
    0x6110, 0x0281, 0xa397, 0xa024, 0x208a, 0x8bfc, 0x4261, 0x419b, 0x887c, 0xf1fc, 0xeb0e, 0xb309, 0x3e01, 0xeeae, 0x468e, 0xea58,
    0xf454, 0x1681, 0xe700, 0x7173, 0x6159, 0x4bc8, 0x7161, 0x734b, 0x7b77, 0xcf13, 0xeb4e, 0xf349, 0x7cad, 0x62f8, 0xd974, 0xeaa8,
    0x04a4, 0xe088, 0x8eca, 0x2170, 0x600d, 0x0e97, 0x79f5, 0x6f87, 0x7b74, 0xcc10, 0xdb50, 0xec9a, 0x50ac, 0xaefb, 0x1137, 0x2687,
    0xe0cb, 0xcd89, 0x53c2, 0xf388, 0xbd6c, 0xb506, 0x5734, 0x4152, 0x41b5, 0xa652, 0x30c6, 0xc70b, 0x7b0e, 0xb66a, 0x0845, 0xcd1d,
    0xc756, 0x2653, 0x341f, 0x5afe, 0x56e7, 0x838a, 0xbc4f, 0x872e, 0x5cc7, 0x09e4, 0x7db7, 0x69e9, 0x7320, 0x101c, 0x1ca7, 0x6b68,
    0xd0b7, 0xb038, 0x3c2d, 0xe094, 0x92d6, 0xf1a3, 0xb451, 0x1168, 0x79d8, 0x42aa, 0x8a50, 0xffc6, 0x3f56, 0xa8f2, 0x7e04, 0xe947,
    0xd856, 0xd981, 0x1f5d, 0xa28f, 0xa937, 0xaaca, 0x642a, 0x6d9c, 0x4279, 0x5983, 0x1887, 0x0f64, 0x9b0d, 0xb32b, 0x1c23, 0xefec,
    0x15c7, 0x925b, 0x7c2e, 0xe17b, 0x6c32, 0xfddc, 0x075a, 0x2d6b, 0xb762, 0x1146, 0x57f6, 0x8390, 0xa655, 0x37c1, 0xb73d, 0x4e19,
    0xf597, 0xc449, 0x0a51, 0xfb1f, 0xa2a3, 0x851b, 0x4be4, 0x5d4d, 0x9265, 0x4210, 0x30ea, 0xeb27, 0x9a20, 0x8f0d, 0xf7bc, 0xcd74,
    0xae3f, 0xd5f3, 0xa15b, 0x4efe, 0x1270, 0x52dd, 0xfd9c, 0x471a, 0x6fc7, 0x3b34, 0x8ebc, 0x5706, 0x7360, 0x505c, 0x5e0b, 0xe73e,
    0x4f4d, 0xb0c8, 0xccdd, 0x169d, 0xfb1c, 0xa1a0, 0xb505, 0x5437, 0x714c, 0x5e66, 0x8a53, 0xfcc5, 0x0f48, 0xb721, 0x5205, 0x2544,
    0x1015, 0x15ae, 0xfb32, 0x8f8e, 0x743f, 0x7832, 0xb94b, 0xd60d, 0x6cb8, 0x7756, 0x2246, 0x6526, 0x709b, 0x98ba, 0x3781, 0xf77d,
    0x0cb5, 0x79c1, 0x5bb3, 0x0aa1, 0x0bef, 0x54aa, 0xecd1, 0x1be7, 0x5c19, 0xd73a, 0x4a84, 0x2c26, 0xeb24, 0x9923, 0xbf13, 0xe86f,
    0xe175, 0x623c, 0x1db0, 0x6d74, 0xaa91, 0x3f71, 0x8fd5, 0x2f64, 0x9a7b, 0xd456, 0x15f5, 0xa069, 0x6dc7, 0x1922, 0xbbca, 0x759a,
    0xcc9c, 0x57dc, 0xa9ba, 0x2747, 0x3100, 0x10c6, 0xc67d, 0x1c73, 0xbfbc, 0x47c0, 0xb51d, 0x4c2f, 0xe1b7, 0xa0fe, 0xfa50, 0xfce7,
    0x2d6a, 0xb663, 0x014c, 0x5d47, 0x986f, 0xe254, 0x7000, 0x0321, 0x123c, 0x1e91, 0x7f48, 0xb400, 0x4039, 0x3bd5, 0x6f5d, 0xa1ae,
    0xbb0b, 0xb45b, 0x1b62, 0xd99c, 0x0240, 0x6256, 0x77da, 0xaeca, 0x2006, 0x0770, 0x0741, 0x3670, 0x1787, 0xf00d, 0x0bf4, 0x4fb1,
    0x4c34, 0xfaac, 0x001b, 0x1b1b, 0xa0e5, 0xe14b, 0x5c02, 0xcc21, 0xea61, 0xcd6d, 0xb726, 0x5502, 0x5572, 0x2502, 0x5653, 0x373e,
    0x48c2, 0x4876, 0xfcc2, 0x084f, 0xc717, 0x6712, 0x66b9, 0xdc19, 0xd2e2, 0xc77b, 0x0b7e, 0xc53b, 0x6928, 0xb2e1, 0xc7e2, 0x92e7,
    0xc092, 0x95a6, 0xf6e2, 0x8221, 0x06ef, 0x89d5, 0x495e, 0xc5e1, 0xb3f2, 0xc5fa, 0xa8e9, 0x651f, 0x49a2, 0x391d, 0x8583, 0xd37c,
    0x48ee, 0x645a, 0x1dec, 0x3128, 0x38ee, 0x677b, 0x0fd0, 0x2fb9, 0x47a6, 0xd37b, 0x4fe9, 0x146c, 0x28fb, 0x72d5, 0xf4e2, 0xa037,
    0x3399, 0xab49, 0xf6a2, 0xc261, 0x4443, 0x0583, 0xd6a4, 0xc511, 0x4302, 0x33f3, 0xc123, 0x351c, 0x48f6, 0x7c42, 0x8d17, 0xcfb0,
    0x48ed, 0x6759, 0x2df2, 0x2efb, 0x14ef, 0xab78, 0xc793, 0xe396, 0xa3c9, 0xfe7a, 0x92e1, 0xc694, 0xf59a, 0xc944, 0xda23, 0x8ee2,
    0x0958, 0xc10b, 0x1d34, 0xe9f0, 0x6fe1, 0x1d12, 0xcfd6, 0x2e8b, 0x649f, 0xd829, 0xa6fe, 0x9c6a, 0xa37d, 0x4ace, 0x666c, 0x09cc,
    0x559f, 0xc8ef, 0x6083, 0x8019, 0x1cc1, 0x0d0e, 0xd371, 0x45e3, 0xb428, 0x6811, 0x9ad3, 0x7cfe, 0x31ab, 0xbb6d, 0xd23d, 0x18a4,
    0x2c47, 0x8a45, 0xead3, 0x7fdf, 0x2397, 0xa5fc, 0xad75, 0xaca4, 0x6c7e, 0xb190, 0x858e, 0xde71, 0x989c, 0x11a7, 0xb617, 0x7538,
    0x6e3e, 0xd3c6, 0xf254, 0x70bb, 0xb89a, 0x16d7, 0xb156, 0x4348, 0x79b9, 0x23cb, 0xf9a0, 0x3f0a, 0xf4ae, 0xec7b, 0xb14d, 0x5853,
    0xd95c, 0xc280, 0xa5a2, 0xf32b, 0x1ecf, 0x2116, 0x066b, 0x0d51, 0x8c2e, 0xe782, 0xf3f1, 0xc415, 0x560d, 0x6960, 0xfaa9, 0x051e,
    0x4b39, 0x8090, 0x9548, 0x180c, 0x84ef, 0xae1b, 0xf1d7, 0xc025, 0x2211, 0x3271, 0x52aa, 0x8aeb, 0x447d, 0x3bbd, 0x0735, 0x4204,
    0x24fe, 0xbba4, 0x1bf4, 0x4f0a, 0xf78f, 0xfe47, 0xafdc, 0x271b, 0x6d5c, 0x82b9, 0x9e77, 0x9c76, 0xbf61, 0x9a1d, 0xb230, 0x1633,
    0x55b2, 0xe5c2, 0x91a7, 0xb3cf, 0xf8c7, 0x4966, 0xfdd9, 0x025f, 0x7d49, 0x9717, 0x6545, 0x13f8, 0xcb5e, 0xe22f, 0x0b7b, 0xc03e,
    0x390a, 0x9294, 0xb3e1, 0xd6e9, 0x885c, 0xd1dc, 0xca58, 0xf522, 0x71fc, 0xeed6, 0x3ef6, 0x1959, 0xc0b1, 0xb685, 0xe7aa, 0xdbd9,
    0x6513, 0x45ae, 0xf965, 0xfacf, 0x6378, 0x48ff, 0x754b, 0x1d4d, 0x9089, 0x8cea, 0x2346, 0x742d, 0x6a20, 0x89f4, 0x687f, 0xf4bd,
    0xff68, 0x91f8, 0xec90, 0x5aa6, 0x0ebf, 0x51dd, 0xce81, 0x68d7, 0x5c15, 0xdb36, 0x8afc, 0x536a, 0x5b20, 0x9932, 0xae02, 0xe8ce,
    0x40d4, 0xd638, 0x598d, 0x1689, 0xef08, 0xf123, 0x34d1, 0x9430, 0x717f, 0x6d55, 0x8bb0, 0x0e2d, 0xc34f, 0x7b66, 0xde02, 0xebef,
    0x52e8, 0xc8a9, 0x26c5, 0xa289, 0xaf31, 0xcaf6, 0x5b8c, 0x359e, 0xca74, 0xd90e, 0x90d2, 0xd7b1, 0xc10f, 0x1930, 0xa9d8, 0x4525,
    0x72ee, 0xcfd9, 0x2184, 0x94f9, 0xb8b6, 0x3afb, 0x5078, 0x7a2f, 0x8640, 0x23a2, 0x90c9, 0xccaa, 0x61ea, 0xf87b, 0xf5da, 0x8904,
    0x988f, 0x02b4, 0x96a2, 0xc1fb, 0xedc4, 0x1ff9, 0x062b, 0x4d11, 0xce82, 0x6bd4, 0x6c0b, 0xc4e5, 0xa6fd, 0x9f69, 0x9363, 0x551d,
    0x4a6d, 0xc5cf, 0x9ddc, 0x04c0, 0x84ec, 0xad18, 0xc1c9, 0xdff6, 0x0e10, 0xfe72, 0x9ae9, 0x46c4, 0xa012, 0x16bc, 0xda3d, 0x90fc,
    0xf99f, 0x0035, 0x3535, 0x61df, 0xcd4e, 0x9405, 0x444a, 0x0c8a, 0x46fe, 0x9a28, 0x8705, 0x77ec, 0x98fc, 0x71c7, 0xd5ed, 0xbf45,
    0xbe39, 0xd34e, 0x7adc, 0x75b3, 0xe5b5, 0xe6d0, 0xb0a8, 0xacbd, 0x7567, 0x3161, 0x71a7, 0xb58d, 0xdcbf, 0x7444, 0x0349, 0x7a54,
    0xfd3b, 0xe0bd, 0xbbff, 0x40af, 0xad43, 0x9a92, 0x3dbf, 0x630d, 0x3d8a, 0x5638, 0x5c55, 0x9b76, 0xc850, 0xdf3c, 0xc4da, 0x99c2,
    0x5ef2, 0x1ec7, 0x291e, 0x863b, 0x58d9, 0x53d6, 0xe79c, 0xedef, 0x34d2, 0x9733, 0x4161, 0x7286, 0xa7b1, 0xc22e, 0x0b0c, 0xb749,
    0x3a6d, 0xc6ee, 0x8fe0, 0x1a51, 0xfba4, 0x1918, 0x81f0, 0xe423, 0x614d, 0x5fdc, 0x21e2, 0xf29f, 0xbb70, 0xcf20, 0xd87d, 0xf2aa,
    0x8e45, 0xaeff, 0x1533, 0x66af, 0xca0f, 0xa275, 0x53cd, 0xfc87, 0x4d0a, 0xd599, 0xcb31, 0x8d40, 0x98e7, 0x6adc, 0x7508, 0x5e0e,
    0xe23b, 0x1f6f, 0x90bd, 0xb8de, 0x5293, 0xb3d2, 0xe5da, 0x89bf, 0x2334, 0x065f, 0x3965, 0xfdfb, 0x207d, 0x7c0b, 0xc45e, 0x1d46,
    0x9b82, 0x3ca4, 0x691d, 0x87d4, 0xa63d, 0x5fa9, 0x5497, 0xd1ec, 0xfa68, 0xc4df, 0x9cc7, 0x0ed0, 0x3eb2, 0x5d1d, 0xc235, 0x1017,
    0x17ac, 0xdb26, 0x9aec, 0x43c1, 0xf030, 0x36c9, 0xae3e, 0xd4f2, 0xb151, 0x444f, 0x098f, 0x16dc, 0xba5d, 0xf306, 0x33e2, 0xd032,
    0x35bd, 0xe957, 0xc846, 0xc92a, 0xb44d, 0x0d74, 0xa90b, 0x96f6, 0x95af, 0xffeb, 0x127b, 0x59d6, 0x4dd2, 0x0d41, 0x9c3e, 0xf729,
    0x58e1, 0x6bee, 0x5631, 0x555c, 0x0b2c, 0x9769, 0x1b3b, 0x80c5, 0xc01d, 0x1a29, 0x83dc, 0xea19, 0xb515, 0x4427, 0x61e7, 0xf576,
    0x25a8, 0xfcf9, 0x3374, 0x46a4, 0xc072, 0x7546, 0x1040, 0x40fb, 0xf917, 0x88bd, 0x303d, 0x3cf0, 0x3d49, 0x95fb, 0xabbf, 0x0054,
    0x5454, 0x122f, 0x0d82, 0x5ffd, 0x00c3, 0xc3c3, 0xf7ea, 0x9b22, 0x9c04, 0xcd13, 0xc958, 0xc63f, 0x5e31, 0xdd04, 0xdef4, 0x1d19,
    0xc4dd, 0x9ec5, 0x2ec4, 0x2bd0, 0x6ae3, 0x4a37, 0x9f95, 0x6f9f, 0x636c, 0x5ceb, 0x25c8, 0x9c99, 0x508e, 0x8cd9, 0x1075, 0x75ce,
    0x98c8, 0x45f3, 0xa438, 0x78ba, 0x31c3, 0xd305, 0x3197, 0x8751, 0x23b8, 0x8ad3, 0x7c45, 0x8a10, 0xbf86, 0x7dfa, 0x24a4, 0xe1fe,
    0xe9b7, 0x28a6, 0x2f88, 0x7697, 0xf28c, 0xa863, 0xef95, 0x6cbe, 0x7150, 0x427a, 0x5a80, 0x2899, 0x10b7, 0xb70c, 0x7f28, 0xd460,
    0x23c3, 0xf1a8, 0xbf5a, 0xa126, 0x3383, 0xb153, 0x464d, 0x299b, 0x03be, 0x8da3, 0x7b04, 0xbc60, 0xa801, 0x8df7, 0x2f50, 0xae4f,
    0xa583, 0xd20a, 0x2f93, 0x6d8c, 0x5269, 0x4928, 0xb397, 0xa09f, 0x9b31, 0x8f17, 0xeda6, 0x7d9b, 0x45c5, 0x920e, 0x297b, 0xe35e,
    0x6b01, 0xb9de, 0x4398, 0xa969, 0xf494, 0xd641, 0x20f4, 0xf582, 0xd15c, 0x4ad8, 0x707a, 0x795b, 0xc129, 0x3f16, 0xe8b2, 0x3ca8,
    0x6511, 0x47ac, 0xd971, 0xefad, 0x5486, 0xc0fd, 0xfac9, 0x657e, 0x28c3, 0x4aed, 0x454f, 0x1884, 0x0c67, 0xab13, 0xacf8, 0x3022,
    0x23ef, 0xdd84, 0x5e74, 0x9841, 0xcc7a, 0xb13a, 0x2f24, 0xda3b, 0x96fa, 0x99a3, 0x3f93, 0x6d37, 0xe9d2, 0x4dc3, 0x1c50, 0x9c9f,
    0x5688, 0xece5, 0x2fd3, 0x2dcc, 0x10c5, 0xc57e, 0x2c6d, 0xa06f, 0x6bc1, 0x791e, 0x846c, 0x2d98, 0x4491, 0xd751, 0x21ef, 0xff92,
    0x6b02, 0xbadd, 0x7386, 0xb6ba, 0xd895, 0x1a42, 0xe8b7, 0x39ad, 0x3533, 0x67d9, 0xad72, 0xaba3, 0x1c48, 0x8487, 0xc673, 0x127d,
    0x5fd0, 0x2dee, 0x32e7, 0xc43c, 0x7f24, 0xd86c, 0xe3bb, 0x8ee4, 0x0f5e, 0xa137, 0x2292, 0xb1f2, 0xe7ec, 0x9d9f, 0x4783, 0xf65e,
    0x3e9d, 0x7232, 0x1305, 0x36a3, 0xc454, 0x174c, 0x3bc6, 0x7c4e, 0x811b, 0x0fc8, 0x37a1, 0xd75d, 0x2de3, 0x3fea, 0x144e, 0x0ad9,
    0x7397, 0xa7ab, 0xd834, 0xbbe3, 0x5cb3, 0x7d90, 0x4ece, 0x2240, 0x6320, 0x10a7, 0xa71c, 0x6f83, 0x7f70, 0x8c38, 0xf194, 0x8366,
    0x50a3, 0xa1f4, 0xe151, 0x4618, 0x7cce, 0x019b, 0x8a90, 0x3f06, 0xf8a2, 0x2c03, 0xce01, 0xe857, 0xd94d, 0xd391, 0xa503, 0x528a,
    0xaacb, 0x652b, 0x7d96, 0x48c8, 0x427c, 0x5c86, 0x48a5, 0x2f11, 0xef0e, 0xf725, 0x54ed, 0xab96, 0x297d, 0xe558, 0x0b3d, 0x8678,
    0x1b9a, 0x2164, 0x7419, 0x5e14, 0xf821, 0xaf80, 0x7b47, 0xff23, 0xdab3, 0x1e72, 0x9cab, 0x62bc, 0x9d30, 0xe82c, 0xa236, 0x108e,
    0x8e35, 0xde8f, 0x6662, 0x07c2, 0xb5f3, 0xa2c1, 0xe779, 0x080a, 0x8252, 0x759c, 0xca9a, 0x37e0, 0x961c, 0x7f45, 0xb90d, 0x904b,
    0x4e28, 0xc4a6, 0xe5be, 0xeddb, 0x00e6, 0xe6e6, 0x869e, 0xfd7c, 0xa7fa, 0x8965, 0xf9ee, 0x7144, 0x566e, 0x0a03, 0xa94d, 0xd0b0,
    0xb73f, 0x4c1b, 0xd583, 0xd12b, 0x3daf, 0x731d, 0x2d21, 0xfd28, 0xf3ae, 0x9b4a, 0xf46c, 0x2eb9, 0x56ad, 0xc9c0, 0x5ea7, 0x4b92,
    0x2b3b, 0x8108, 0x1cdb, 0x1714, 0x639e, 0xae19, 0xf3d5, 0xe031, 0x3773, 0x058f, 0xdaa8, 0x0569, 0x3c4e, 0x83f7, 0xc132, 0x240d,
    0x4857, 0xdde3, 0x3913, 0x8b8d, 0x3310, 0x22c0, 0xe3a0, 0x95ff, 0xafbb, 0x407c, 0x7e90, 0x7dd3, 0x0d8d, 0x50f2, 0xf0a5, 0xa35c,
    0x6bef, 0x5730, 0x4556, 0x019d, 0x8c96, 0x5f3a, 0xc704, 0x7401, 0x460c, 0x68da, 0x5118, 0x0b44, 0xff01, 0xf891, 0x1f30, 0xcfe2,
    0x1abf, 0x154a, 0x1fd6, 0x2904, 0x9c21, 0xe836, 0xb82c, 0xa061, 0x65cf, 0x9972, 0xee42, 0xaa62, 0xcc82, 0x49c2, 0x597d, 0xe679,
    0x1901, 0x98e9, 0x64d2, 0x9564, 0x3420, 0x65c1, 0x977c, 0x0e2e, 0xc04c, 0x4b78, 0xc1d1, 0xc7ee, 0x9eeb, 0x00ea, 0xeaea, 0x46e6,
    0x8230, 0x17fe, 0x8974, 0xe8ff, 0x71e5, 0xf7cf, 0xbe07, 0xed70, 0xab4d, 0xf2a6, 0x8249, 0x6e87, 0x6a7f, 0xd6ab, 0xca1e, 0xb364,
    0x536c, 0x5d26, 0xf90e, 0x91a4, 0xb0cc, 0xc8d9, 0x56b5, 0xd1d8, 0xce5c, 0xb50a, 0x5b38, 0x812a, 0x3ef9, 0x1656, 0x30d7, 0xd61a,
    0x7baf, 0x17cb, 0xbc41, 0x8920, 0xbcab, 0x63ca, 0xfa4d, 0xe1fa, 0xedb3, 0x688e, 0x054c, 0x196b, 0xf283, 0xa76c, 0x1ff3, 0x0c21,
    0xed55, 0x8e68, 0x83d2, 0xe417, 0x5579, 0x2e09, 0xe61d, 0x7d65, 0xbb3b, 0x846b, 0x2a9f, 0x34a7, 0xe246, 0x6212, 0x339e, 0xac4e,
    0x8694, 0xf776, 0x07be, 0xc98f, 0x11e8, 0xf958, 0xc7f2, 0x82f7, 0xd039, 0x3eb6, 0x5919, 0x821d, 0x3ad3, 0x7850, 0xdb29, 0x95e3,
    0xb3a7, 0x90af, 0xaacc, 0x622c, 0x0da0, 0x7ddf, 0x0181, 0x908a, 0x8fe9, 0x1358, 0x6bfe, 0x4621, 0x45f7, 0xa03c, 0x3892, 0x1b07,
    0xbcf9, 0x3198, 0x885e, 0xd3de, 0xea4c, 0xe040, 0x4602, 0x66d4, 0xb174, 0x616a, 0x78fb, 0x7082, 0x81a3, 0xb770, 0x0354, 0x6749,
    0x3de2, 0x3e50, 0xbfff, 0x0483, 0xc7af, 0xdfaa, 0x524c, 0x6c0d, 0xc2e3, 0xc6c1, 0xa0cf, 0xcb61, 0xdd10, 0xcae0, 0x4d9a, 0x4509,
    0x5ec2, 0x2ef7, 0x18e3, 0x6b00, 0xb8df, 0x5392, 0xa3d8, 0xef6b, 0x9240, 0x6735, 0x419e, 0x8d79, 0xa1de, 0xcb7b, 0xc70a, 0x7a0f,
    0xa660, 0x02f4, 0xd6e2, 0x8357, 0x6192, 0x8003, 0x06db, 0xbde1, 0x388b, 0x021e, 0x3c08, 0xc5b1, 0xe3a2, 0x97fd, 0x8faf, 0x551e,
    0x496e, 0xf5d1, 0x820f, 0x28c1, 0x48ef, 0x655b, 0x0de6, 0x3b99, 0x2311, 0x237a, 0x4811, 0x9ba5, 0x1b83, 0x387d, 0xf4e8, 0xaa3d,
    0x93dd, 0xeba3, 0x1ea4, 0x4a7d, 0xd5df, 0x8d77, 0xafd0, 0x2b17, 0xad24, 0xfdf5, 0x2e73, 0x9c67, 0xae70, 0x9abc, 0x1391, 0xa237,
    0x118f, 0x9e3f, 0xd43e, 0x7d9d, 0x43c3, 0xf232, 0x16dd, 0xbb5c, 0xe30c, 0x3953, 0xcbcd, 0x71bc, 0xae96, 0x7c5a, 0x950f, 0x5f4b,
    0xb675, 0x175a, 0x2dd0, 0x0cd9, 0x15ad, 0xf831, 0xbf90, 0x6bec, 0x5433, 0x7548, 0x1e4e, 0xa097, 0x9339, 0x0f47, 0xb82e, 0xa263,
    0x45db, 0x8c10, 0xd9bc, 0x2260, 0x4300, 0x31f1, 0xe137, 0x207e, 0x7f08, 0xf440, 0x0295, 0xb783, 0xf0a7, 0xa15e, 0x4bfb, 0x4252,
    0x72a8, 0x899f, 0x0314, 0x2709, 0x7f4e, 0xb206, 0x2005, 0x0473, 0x375f, 0x29a3, 0x3b86, 0x3c0e, 0xc3b7, 0x839e, 0xa85b, 0xd7ad,
    0xdd13, 0xc9e3, 0x7d84, 0x5ada, 0x72c3, 0xe2f4, 0xd0a0, 0xa72f, 0x5cb0, 0x7e93, 0x7ed0, 0x3d93, 0x4f21, 0xdca4, 0x6f5f, 0xa3ac,
    0x9b1f, 0xa139, 0x2c9c, 0x519e, 0x8dc2, 0x1a65, 0xcf90, 0x68cd, 0x460f, 0x6bd9, 0x6106, 0x1497, 0xd300, 0x3492, 0xd773, 0x03cd,
    0xfed0, 0x384b, 0xc2de, 0xfbfc, 0x4140, 0x53a7, 0x96ed, 0x8eb4, 0x5f0e, 0xf330, 0x05d4, 0x81f3, 0xe720, 0x5153, 0x400f, 0x0de3,
    0x3e9c, 0x7333, 0x030f, 0x3c12, 0xdfab, 0x534d, 0x7c07, 0xc852, 0xdd3e, 0xe4ce, 0x8ca0, 0x690c, 0x96c5, 0xa69c, 0xfe08, 0xe093,
    0x95d1, 0x8195, 0x8146, 0x5295, 0xb5d4, 0x85e6, 0xb619, 0x7b36, 0x8e52, 0xb9e8, 0x75ae, 0xf8a8, 0x2609, 0x6e45, 0xa8bd, 0x314b,
    0x5b8d, 0x349f, 0xda7e, 0xd3bf, 0x8b2d, 0x93b0, 0x86ce, 0xad2c, 0xf5fd, 0xae23, 0xc9ef, 0x7188, 0x9aa2, 0x0d8f, 0x52f0, 0xd0b1,
    0xb63e, 0x5c11, 0xdf32, 0xcad4, 0x79ae, 0x34dc, 0x993d, 0xa10d, 0x18a8, 0x204b, 0x4a3d, 0x959f, 0xcfdb, 0x2386, 0xb4ed, 0xadd4,
    0x0d05, 0xd87a, 0xf5ad, 0xfe73, 0x9be8, 0x56ce, 0xaaa3, 0x0d43, 0x9e3c, 0xd73d, 0x4d83, 0x5c10, 0xde33, 0xdade, 0x731f, 0x2f23,
    0xdd3c, 0xe6cc, 0xacb4, 0x7c6e, 0xa13b, 0x2e9e, 0x718a, 0x98a0, 0x2d9b, 0x4792, 0xe74f, 0x3e3c, 0xd393, 0xa701, 0x729e, 0xbfa9,
    0x52d5, 0xf594, 0xc74a, 0x3a4f, 0xe4cc, 0x8ea2, 0x4918, 0x83a7, 0x9162, 0x760a, 0x6f11, 0xede2, 0x39df, 0x4741, 0x349c, 0xd97d,
    0xe3a1, 0x94fe, 0xbfb1, 0x4acd, 0x656f, 0x39d2, 0x4a4c, 0xe4ee, 0xac80, 0x485a, 0xd0ee, 0xe961, 0xfe70, 0x98eb, 0x66d0, 0xb570,
    0x2142, 0x523f, 0x1f7e, 0x81ac, 0xb87f, 0xf332, 0x07d6, 0xa1e7, 0xf242, 0x66ad, 0xc80d, 0x8261, 0x46af, 0xcb79, 0xc508, 0x5a1b,
    0xb302, 0x350a, 0x5ee0, 0x0cd5, 0x19a1, 0x3849, 0xc0dc, 0xdbe8, 0x5422, 0x6459, 0x1eef, 0x0136, 0x273d, 0x4b7a, 0xc3d3, 0xe7fa,
    0x8b89, 0x3714, 0x62e8, 0xc964, 0xfa03, 0xafb4, 0x4f73, 0x8ef6, 0x1d4c, 0x9188, 0x9ce0, 0x29f7, 0x6fd2, 0x2e21, 0xce35, 0xdc63,
    0xa898, 0x146e, 0x2af9, 0x52c1, 0xe180, 0x97c9, 0xbb9b, 0x24cb, 0x8e91, 0x7a2b, 0x8244, 0x638a, 0xba0d, 0xa356, 0x61e5, 0xf774,
    0x05bc, 0xe99b, 0x048a, 0xcea6, 0x4ff0, 0x0d75, 0xa80a, 0x86fc, 0x9f1e, 0xe414, 0x567a, 0x1e17, 0xf9ce, 0x5164, 0x7738, 0x4c28,
    0xe6b0, 0xd0c8, 0xcf47, 0xbf1a, 0xe166, 0x712f, 0x3d05, 0xd9b7, 0x296b, 0xf34e, 0x7baa, 0x12ce, 0xec63, 0xa955, 0xc8a8, 0x27c4,
    0xb283, 0xa580, 0xd109, 0x1f8d, 0x725f, 0x7e68, 0x852b, 0x7bd4, 0x6cb0, 0x7f5e, 0xa216, 0x30ae, 0xaf63, 0x98a4, 0x299f, 0x07ba,
    0xcd8b, 0x51c0, 0xd39c, 0xa80e, 0x82f8, 0xdf36, 0xced0, 0x3986, 0x1e18, 0xf6c1, 0xa102, 0x17a7, 0xd02d, 0x2aa2, 0x099a, 0x03c9,
    0xfad4, 0x7863, 0xe81a, 0x9400, 0x414f, 0x5ca8, 0x668b, 0xee2b, 0xc30b, 0x3f22, 0xdc86, 0x4d7d, 0xa2ee, 0xc856, 0xd93a, 0xa4e6,
    0xa664, 0x06f0, 0x96ca, 0xa993, 0x0e6e, 0x800c, 0x09d4, 0x4d87, 0x5814, 0x9e1b, 0xf01a, 0x1ce3, 0x2f2c, 0xd233, 0x16aa, 0xcc2b,
    0xe06b, 0x6d29, 0xf7cc, 0xbd04, 0xdd6e, 0xb49e, 0xdea7, 0x4e4a, 0xa6c4, 0xa650, 0x32c4, 0xe71f, 0x6e6c, 0x8194, 0x8047, 0x429f,
    0xbf65, 0x9e19, 0xf218, 0x3cf7, 0x3a4e, 0xe5cd, 0x9ea8, 0x43a9, 0x9858, 0xd563, 0x31cb, 0xdb0d, 0xb1c7, 0xd2d9, 0xfc40, 0x8acd,
    0x625b, 0x7ad7, 0x7eb8, 0x55fb, 0xac8b, 0x4351, 0x60a0, 0xa33a, 0x0d89, 0x54f6, 0xb08d, 0x8998, 0x0413, 0x573f, 0x4a59, 0xf1fb,
    0xec09, 0xc33f, 0x0b16, 0xad53, 0x8a82, 0x2d14, 0xc81d, 0x9271, 0x5604, 0x6069, 0x6af3, 0x5a27, 0x8f3e, 0xc48f, 0xcc97, 0x5cd7,
    0x19f4, 0x6d1c, 0xc2f9, 0xdcdb, 0x1020, 0x209b, 0x9aed, 0x42c0, 0xe03a, 0x3c78, 0xb5c1, 0x90f3, 0xf690, 0xf053, 0x55aa, 0xfdda,
    0x015c, 0x4d57, 0x88c4, 0x4944, 0xdffb, 0x031d, 0x2e00, 0xef14, 0xed3f, 0xe402, 0x406c, 0x6e80, 0x6d78, 0xa69d, 0xff09, 0xf099,
    0x9f60, 0x9a6a, 0xc547, 0x1554, 0x01c8, 0xd9c3, 0x5d1f, 0xc037, 0x3003, 0x02ce, 0xecd8, 0x12ee, 0xcc43, 0x8803, 0x8e83, 0x6839,
    0xb2fb, 0xddf8, 0x2208, 0x2b68, 0xd25b, 0x7ec2, 0x2f81, 0x7f9e, 0x62d6, 0xf75a, 0x2b92, 0x28a1, 0x288f, 0x06a1, 0xc79b, 0xeb9e,
    0x2399, 0xabf2, 0x4d19, 0xc68a, 0xeb84, 0x3983, 0x1b1d, 0xa6e3, 0x8177, 0x63a4, 0x9423, 0x626c, 0x4de0, 0x3f73, 0x8dd7, 0x0f70,
    0x8f19, 0xe3a8, 0x9df7, 0x2feb, 0x15f4, 0xa168, 0x7dcd, 0x1393, 0xa035, 0x319b, 0x8b5d, 0xe3c0, 0xf59f, 0xcc41, 0x8a01, 0xae97,
    0x7d5b, 0x8505, 0x55fa, 0xad8a, 0x535b, 0x6a11, 0xb8c5, 0x4988, 0x1337, 0x0491, 0xd5bd, 0xef15, 0xec3e, 0xf408, 0x4add, 0x757f,
    0x2979, 0xe15c, 0x4b15, 0xacbc, 0x7466, 0x216b, 0x7b16, 0xae72, 0x98be, 0x3385, 0xb755, 0x2671, 0x163d, 0x5bbc, 0x05ae, 0xfb89,
    0x3435, 0x70d4, 0xd7f5, 0x854b, 0x1bb4, 0x0f4a, 0xb523, 0x7211, 0x3026, 0x27eb, 0x9dac, 0x74b0, 0xf7bd, 0xcc75, 0xbe35, 0xdf42,
    0xbaa4, 0x0aff, 0x55b1, 0xe6c1, 0xa1b9, 0xac1c, 0xd4c6, 0x8565, 0x359a, 0xce70, 0x9926, 0xba16, 0xb84d, 0xc100, 0x163f, 0x59be,
    0x25ba, 0xeeeb, 0x03cb, 0xf8d6, 0x5877, 0xfd78, 0xa3fe, 0xc94d, 0xd32a, 0x1eb8, 0x5661, 0x050c, 0x592b, 0xb02f, 0x2b3a, 0x8009,
    0x0cd1, 0x1da5, 0x7861, 0xea18, 0xb414, 0x542d, 0x6b56, 0xee89, 0x61a9, 0xbb38, 0x8768, 0x1a81, 0x2b74, 0xce47, 0xae11, 0xfbdd,
    0x6061, 0x62fb, 0xda77, 0xdab6, 0x1b77, 0xcc89, 0x42c9, 0xe933, 0xac22, 0xeaf8, 0x54f4, 0xb28f, 0xa98c, 0x1171, 0x60c1, 0xc25b,
    0x7e79, 0x943a, 0x7b75, 0xcd11, 0xcb5a, 0xe62b, 0x4b53, 0xeafa, 0x56f6, 0x929b, 0xbcee, 0x268f, 0xe8c3, 0x4dd9, 0x064a, 0x2c70,
    0xbd72, 0xab18, 0xa7f3, 0x806c, 0x69b4, 0x2e7d, 0x9269, 0x4e1c, 0xf092, 0x946b, 0x2a24, 0x8f1c, 0xe6ad, 0xcdd5, 0x0f9e, 0x61f7,
    0xe566, 0x3503, 0x57e9, 0x9c8f, 0x4698, 0xfc4e, 0x84c3, 0x8237, 0x10f9, 0xf942, 0xdde8, 0x3218, 0x3bc3, 0x794b, 0xd139, 0x2fbd,
    0x43a2, 0x9353, 0x652d, 0x7b90, 0x28f4, 0x7dda, 0x0484, 0xc0a8, 0xaf9c, 0x675b, 0x2ff0, 0x0eef, 0x018d, 0x9c86, 0x4f91, 0x6c14,
    0xdbfa, 0x4630, 0x54e6, 0xa09d, 0x9933, 0xaf03, 0xf8c4, 0x4a65, 0xcdc7, 0x1d8c, 0x5148, 0x5b14, 0xad06, 0xdfd7, 0x2f31, 0xcf2e,
    0xd673, 0x12c6, 0xe46b, 0x2905, 0x9d20, 0xf83c, 0xb29d, 0xbb9e, 0x21ce, 0xdeb3, 0x5a5e, 0xf647, 0x2784, 0xf2c3, 0xe72c, 0x5d5f,
    0x8077, 0x72af, 0x8e98, 0x7322, 0x121e, 0x3cb3, 0x7e0a, 0xe749, 0x383a, 0xb3af, 0x98a7, 0x2a9c, 0x37a4, 0xd258, 0x7dc1, 0x1f9f,
    0x604d, 0x4ed7, 0x3b59, 0xe3d1, 0xe48e, 0xcce0, 0x2ba0, 0x1a93, 0x3966, 0xfef8, 0x1063, 0x63d8, 0xe85f, 0xd145, 0x53c1, 0xf08b,
    0x8d72, 0xaad5, 0x7b35, 0x8d51, 0x89f6, 0x6a7d, 0xd4a9, 0xea0a, 0xa606, 0x6492, 0xd524, 0x768c, 0xe997, 0x0886, 0x0ede, 0x30bc,
    0xbd71, 0xa81b, 0x97ed, 0x9fbf, 0x45b5, 0xe27e, 0x5a2a, 0x8233, 0x14fd, 0xb96a, 0xf72c, 0x5de4, 0x3bcc, 0x7644, 0x215f, 0x4f22,
    0xdfa7, 0x5f41, 0xbc7f, 0xb71e, 0x6d3a, 0xe4df, 0x9db1, 0x69ad, 0x3764, 0x1298, 0xba35, 0x9b6e, 0xd048, 0x4fc7, 0x3a42, 0xe9c1,
    0x5ed0, 0x3ce5, 0x285c, 0xd572, 0x20da, 0xdbac, 0x1066, 0x66dd, 0xb87d, 0xf130, 0x27c2, 0xb485, 0xc5bc, 0xeeaf, 0x478f, 0xfa52,
    0xfee5, 0x0d7e, 0xa301, 0x36b2, 0xd545, 0x17ed, 0x9a67, 0xc84a, 0xc526, 0x7435, 0x7238, 0x190f, 0x96e7, 0x84be, 0xff4a, 0xb3da,
    0xedd2, 0x09ef, 0x76bc, 0xd9a7, 0x397b, 0xe3e5, 0xd0ba, 0xbd35, 0xec5f, 0x9569, 0x392d, 0xb5b3, 0xe281, 0xa5d5, 0x845c, 0x1da8,
    0x756c, 0x3a6a, 0xc1e9, 0xffd6, 0x2f46, 0xb859, 0xd514, 0x46bc, 0xd86a, 0xe5bd, 0xeed8, 0x30f8, 0xf935, 0xaa9f, 0x317f, 0x6fb9,
    0x454a, 0x1d81, 0x5c45, 0x8b66, 0xd8fb, 0x742c, 0x6b21, 0x99fe, 0x62ce, 0xef42, 0xbb69, 0xd639, 0x588c, 0x0683, 0xe5b9, 0xeadc,
    0x70d0, 0xd3f1, 0xc563, 0x3170, 0x60b6, 0xb52c, 0x7d1e, 0xc040, 0x4774, 0x01a9, 0xb8a2, 0x2eef, 0x00fb, 0xfbfb, 0x4647, 0x2391,
    0xa3fa, 0xcd49, 0x9302, 0x347c, 0x399d, 0x0503, 0x5624, 0x4049, 0x4ba5, 0x1c0c, 0xc0c3, 0xc4f7, 0xb4ef, 0xafd6, 0x2d11, 0xcd18,
    0xc253, 0x7671, 0x146a, 0x2efd, 0x12e9, 0xcb44, 0xf835, 0xbb94, 0x2bc4, 0x7ef7, 0x1ab4, 0x1e41, 0xaf98, 0x635f, 0x6fd8, 0x242b,
    0x6e71, 0x9c89, 0x409e, 0x9c72, 0xbb65, 0xda35, 0x98f4, 0x79cf, 0x55bd, 0xeacd, 0x61c1, 0xd350, 0x64c2, 0x8574, 0x248b, 0xced1,
    0x3887, 0x0e12, 0xfc70, 0xbafd, 0x53a6, 0x97ec, 0x9ebe, 0x55bf, 0xe8cf, 0x41d5, 0xc632, 0x533c, 0x0d76, 0xab09, 0xb6e2, 0x80cd,
    0xc815, 0x9a79, 0xd654, 0x35e1, 0xb50b, 0x5a39, 0x9120, 0x3448, 0x0da9, 0x74d6, 0x91db, 0xcfb3, 0x4bee, 0x5747, 0x3221, 0x02fa,
    0xd8ec, 0x633b, 0x0bbc, 0x07f9, 0x8ec8, 0x2372, 0x4019, 0x1bf5, 0x4e0b, 0xe785, 0xf4f6, 0xb423, 0x631a, 0x2a9d, 0x36a5, 0xc252,
    0x7770, 0x0460, 0x244c, 0x0916, 0x8f45, 0xbff4, 0x0f88, 0x77e1, 0x95f1, 0xa1b5, 0xa010, 0x14be, 0xfa29, 0x859e, 0xce61, 0x8837,
    0xbab7, 0x19ec, 0x7504, 0x5202, 0x2243, 0x6023, 0x20b9, 0xb8cf, 0x4382, 0xb373, 0x447b, 0x3dbb, 0x6709, 0x7da2, 0x7cfc, 0x33a9,
    0x9b79, 0xc75f, 0x2f5a, 0xa445, 0x05c7, 0x92e0, 0xc795, 0xe590, 0xc3f5, 0xc1dc, 0xcae3, 0x4e99, 0x7517, 0x4111, 0x02f6, 0xd4e0,
    0xa343, 0x74f0, 0xb7fd, 0x8ed9, 0x3263, 0x40b8, 0xba54, 0xfa0f, 0xa3b8, 0x8f0b, 0xf1ba, 0xad48, 0x9199, 0x8df1, 0x2956, 0xce73,
    0x9a25, 0x8a08, 0xa79e, 0xed01, 0xda3c, 0x91fd, 0xe995, 0x0a84, 0x2eca, 0x25de, 0x8a8f, 0x2019, 0x186f, 0xe78c, 0xfdff, 0x2479,
    0x3c23, 0xee9a, 0x72ba, 0x9b8d, 0x33ab, 0x997b, 0xe74b, 0x3a38, 0x93bb, 0x8dc5, 0x1d62, 0xbfa6, 0x5dda, 0x05f2, 0xa7d5, 0xa64a,
    0x28de, 0x57f0, 0x8596, 0xc669, 0x0867, 0xef3f, 0xc614, 0x751a, 0x4c1c, 0xd284, 0xa11d, 0x08b8, 0x30e0, 0xe12d, 0x3a64, 0xcfe7,
    0x1fba, 0x4568, 0x3fa3, 0x5d07, 0xd82f, 0xa0f8, 0xfc56, 0x9cdb, 0x12cc, 0xee61, 0x8941, 0xddca, 0x103a, 0x3a81, 0x2a02, 0xa93a,
    0xa7c7, 0xb458, 0x1861, 0xe982, 0x1d93, 0x4e57, 0xbbd9, 0x6689, 0xec29, 0xe31f, 0x2a40, 0xeb78, 0xc57f, 0x2d6c, 0xb065, 0x6170,
    0x62e1, 0xc06d, 0x6a59, 0xf08d, 0x8b74, 0xcae9, 0x4493, 0xd553, 0x01fb, 0xeaf0, 0x5cfc, 0x32df, 0xfc04, 0xce89, 0x60df, 0xdc45,
    0x8ebe, 0x5504, 0x5374, 0x453e, 0x69f5, 0x6f3c, 0xc0cf, 0xc8fb, 0x7497, 0xd09a, 0x9d15, 0xcd09, 0xd342, 0x76d0, 0xb5cb, 0x9af9,
    0x56d4, 0xb0b9, 0xbdac, 0x75c6, 0x90c0, 0xc5a3, 0xf1b0, 0xa742, 0x31dd, 0xcd1b, 0xc150, 0x466f, 0x0bb9, 0x02fc, 0xdeea, 0x0307,
    0x341a, 0x5ffb, 0x06c5, 0xa3ff, 0xc84c, 0xc320, 0x1409, 0x4d9e, 0x410d, 0x1eea, 0x0433, 0x771f, 0x6b0f, 0xb7d0, 0xa3f4, 0xc347,
    0x736e, 0x5e52, 0xbe67, 0x8d10, 0xc8b7, 0x38db, 0x524e, 0x6e0f, 0xe2f7, 0xd3a3, 0x9731, 0x4363, 0x5292, 0xb2d3, 0xf5d0, 0x830e,
    0x38cb, 0x425e, 0x7ea4, 0x49e7, 0x7c58, 0x970d, 0x7f5f, 0xa317, 0x20a4, 0xa5d2, 0x835b, 0x6d9e, 0x407b, 0x7997, 0x0de5, 0x389a,
    0x130f, 0x3ca9, 0x6410, 0x57a6, 0xd3c0, 0xf452, 0x1087, 0x873c, 0x4ed5, 0x395b, 0xc3c5, 0xf1ec, 0xfb1e, 0xa3a2, 0x9511, 0x4155,
    0x46b2, 0xd664, 0x05d1, 0x84f6, 0xb702, 0x7126, 0x340c, 0x49ed, 0x7652, 0x3749, 0x3fb5, 0x4b11, 0xa8b8, 0x344e, 0x0baf, 0x14ea,
    0xae7d, 0x97b1, 0xc3e3, 0xd7ca, 0xba74, 0xda2f, 0x82ee, 0xc920, 0xbe47, 0xad30, 0xe9e1, 0x7ef0, 0x1db3, 0x6e77, 0x9a8f, 0x20a2,
    0xa3d4, 0xe367, 0x5238, 0x1879, 0xf19a, 0x8d68, 0xb0cf, 0xcbda, 0x66ab, 0xce0b, 0xe25d, 0x7909, 0x937b, 0x4d05, 0xda96, 0x3b57,
    0xeddf, 0x04e2, 0xa6ce, 0xac5a, 0x9280, 0xa7f5, 0x866a, 0x0988, 0x11db, 0xca6b, 0xc611, 0x701f, 0x1c3e, 0xf2f1, 0xd51e, 0x4cb6,
    0x782e, 0xa557, 0x06de, 0xb8e4, 0x68a9, 0x226b, 0x480b, 0x81bf, 0xab6c, 0xd387, 0xb315, 0x221d, 0x3e7d, 0x92d2, 0xf5a7, 0xf479,
    0x3bac, 0x1624, 0x42a5, 0x855f, 0x0fa0, 0x5fc9, 0x34f7, 0xb216, 0x3015, 0x14d8, 0x9c4f, 0x8658, 0x3bba, 0x0032, 0x3232, 0x11e9,
    0xf859, 0xd7f8, 0x8846, 0xcbc6, 0x7ab7, 0x1ed8, 0x3601, 0x66f6, 0x9356, 0x6028, 0x2bb2, 0x0881, 0x09d9, 0x408a, 0x8866, 0xebe6,
    0x5be1, 0x58f3, 0x79fc, 0x668e, 0xeb2e, 0x9329, 0x1f57, 0xa885, 0x0973, 0xea20, 0x8c2c, 0xe580, 0xd3e5, 0xd177, 0x61f3, 0xe162,
    0x752b, 0x7d2d, 0xf373, 0x4697, 0xf341, 0x74a5, 0xe2a8, 0x8cfc, 0x3550, 0x04ba, 0xfe96, 0x7e0d, 0xe04e, 0x480c, 0x86b8, 0xdb5a,
    0xe690, 0xf0e8, 0xee11, 0xf931, 0xae9b, 0x7157, 0x457d, 0x2ab6, 0x1d8e, 0x534a, 0x7b00, 0xb864, 0xe829, 0xa733, 0x40ac, 0xae40,
    0xaa8c, 0x226c, 0x4f0c, 0xf189, 0x9e7b, 0x907a, 0x7f19, 0xe551, 0x0234, 0x1622, 0x44a3, 0xe563, 0x3006, 0x07cb, 0xbcfa, 0x329b,
    0xb840, 0xcc0d, 0xc64d, 0x2c43, 0x8e41, 0xaafb, 0x551b, 0x4c6b, 0xa5f3, 0xa27a, 0x5cc2, 0x0ce1, 0x2d95, 0x499c, 0x0723, 0x5412,
    0x5469, 0x2f12, 0xec0d, 0xc73b, 0x4b3e, 0x8797, 0xe57e, 0x2d1b, 0xc712, 0x6217, 0x369b, 0xfc6c, 0xa6e1, 0x8375, 0x43b0, 0x8141,
    0x5592, 0xc5e2, 0xb0f1, 0xf5e4, 0xb73a, 0x491e, 0x85a1, 0xf15e, 0x49ac, 0x3713, 0x65ef, 0xb952, 0xcf14, 0xec49, 0x837f, 0x49ba,
    0x2105, 0x1578, 0x2de4, 0x38ed, 0x6478, 0x3fce, 0x306a, 0x6ba7, 0x1f78, 0x87aa, 0xd843, 0xcc94, 0x5fd4, 0x29ea, 0x72cf, 0xeef8,
    0x10d8, 0xd863, 0xecb4, 0x7e82, 0x6fc1, 0x3d32, 0xee80, 0x68a0, 0x2b62, 0xd851, 0xde86, 0x6f6b, 0x9798, 0xeaca, 0x66c6, 0xa366,
    0x51d5, 0xc689, 0xe887, 0x099d, 0x04ce, 0x8ae2, 0x4d74, 0xabe7, 0x580c, 0x8603, 0x60e1, 0xe27b, 0x5f2f, 0xd211, 0x3488, 0xcd69,
    0xb322, 0x152a, 0x7fb6, 0x4afe, 0x565c, 0x3831, 0xb8a4, 0x28e9, 0x60c7, 0xc45d, 0x1e45, 0xab9c, 0x2377, 0x451c, 0x4bd7, 0x6e7e,
    0x9386, 0xb0f8, 0xfced, 0x2760, 0x1627, 0x41a6, 0xb541, 0x1073, 0x73c8, 0xf8f4, 0x7a55, 0xfc3a, 0xf0b7, 0xb14e, 0x5b50, 0xe942,
    0xdd53, 0x89a3, 0x3f28, 0xd68c, 0xed39, 0xe204, 0x2050, 0x5126, 0x357a, 0x2e90, 0x7f84, 0x78cc, 0x47b5, 0xc068, 0x6f5c, 0xa0af,
    0xab01, 0xbeea, 0x009d, 0x9d9d, 0x4581, 0xd64a, 0x2bff, 0x45cc, 0x9b07, 0xb921, 0xbc67, 0xaf06, 0xfdc1, 0x1a47, 0xedb2, 0x698f,
    0x1546, 0x13da, 0xe97c, 0xe36d, 0x5832, 0xb83d, 0xb170, 0x656e, 0x38d3, 0x5a46, 0xee5f, 0xb77f, 0x0c5b, 0x972f, 0x5d7d, 0xa255,
    0x73ed, 0xddd1, 0x0b21, 0x9a64, 0xcb49, 0xf538, 0x6be6, 0x5e39, 0xd50c, 0x5ea4, 0x4891, 0x1b25, 0x9edb, 0x30da, 0xdb17, 0xabdd,
    0x6236, 0x17ba, 0xcd30, 0xea7b, 0xd777, 0x07c9, 0xbef8, 0x128f, 0xad22, 0xfbf3, 0x4e4f, 0xa3c1, 0xf672, 0x12b1, 0x931c, 0x2a62,
    0xc95a, 0xc43d, 0x7e25, 0xc866, 0xe90a, 0x951b, 0x4b5f, 0xe6f6, 0x968e, 0xedd7, 0x0cea, 0x269e, 0xf9d2, 0x4d78, 0xa7eb, 0x9874,
    0xf94f, 0xd0e5, 0xe26a, 0x4e3e, 0xd2b0, 0x9529, 0x796d, 0xf71f, 0x6ed7, 0x3a2f, 0x84ac, 0xed58, 0x8365, 0x53a0, 0x91ea, 0xfe82,
    0x6a19, 0xb0cd, 0xc9d8, 0x46bf, 0xdb69, 0xd5a3, 0xf10b, 0x1cf9, 0x3536, 0x62dc, 0xfd50, 0x8bd6, 0x684b, 0xc089, 0x8ebd, 0x5607,
    0x636a, 0x5aed, 0x45f4, 0xa33f, 0x088c, 0x04d4, 0x90f8, 0xfd9b, 0x401d, 0x1ff1, 0x0e23, 0xcd41, 0x9b0a, 0xb42c, 0x6c15, 0xdafb,
    0x563a, 0x5e57, 0xbb62, 0xdd32, 0xe8c2, 0x4cd8, 0x1640, 0x26c1, 0xa68d, 0xef19, 0xe032, 0x3470, 0x3591, 0xc57b, 0x2968, 0xf04d,
    0x4bb4, 0x0d1d, 0xc062, 0x6556, 0x00eb, 0xebeb, 0x56ec, 0x8881, 0x0c01, 0xcd75, 0xaf3e, 0xc5f9, 0xabea, 0x5501, 0x5671, 0x151c,
    0x4980, 0x1b3f, 0x84c1, 0x8035, 0x30ed, 0xec20, 0xea16, 0xba1a, 0xb441, 0x0178, 0x6973, 0xe9ba, 0x25ab, 0xfffa, 0x036a, 0x5977,
    0xec73, 0xb945, 0xd803, 0x8cd4, 0x1d78, 0xa5bc, 0xed35, 0xee08, 0xe028, 0x2e6a, 0x857e, 0x2e81, 0x6e95, 0x786d, 0xe614, 0x746c,
    0x2b61, 0xdb52, 0xee98, 0x70b8, 0xbb99, 0x26c9, 0xae85, 0x6f49, 0xb5ba, 0xeb88, 0x358f, 0xdb65, 0xd9af, 0x3173, 0x63b5, 0x8532,
    0x62cd, 0xec41, 0x8b77, 0xc9ea, 0x748d, 0xca80, 0x2dfa, 0x26f3, 0x94bf, 0xfef0, 0x186b, 0xe388, 0xbdd7, 0x0ebd, 0x53df, 0xee95,
    0x7db5, 0x6beb, 0x5334, 0x057e, 0x2b59, 0xe36a, 0x5f35, 0xc80b, 0x8467, 0x2693, 0xf4df, 0x9d0a, 0xd216, 0x338f, 0xbd5f, 0x8635,
    0x56d7, 0xb3ba, 0x8db2, 0x6a15, 0xbcc1, 0x09a0, 0x39f3, 0x6b6d, 0xd5b2, 0xe01a, 0x1c58, 0x9497, 0xd6d8, 0xb96d, 0xf02b, 0x2dd2,
    0x0edb, 0x35b9, 0xed53, 0x886e, 0xe3ee, 0xdbb1, 0x0d7b, 0xa604, 0x6690, 0xf530, 0x63ee, 0xde69, 0x8084, 0x815c, 0x488f, 0x053b,
    0x6e1c, 0xf1e4, 0xf316, 0x23f2, 0xc099, 0x9ead, 0x46ac, 0xc87a, 0xf516, 0x45c8, 0x9f03, 0xf909, 0x96a3, 0xc0fa, 0xfdce, 0x1548,
    0x1dd4, 0x0910, 0x8943, 0xdfc8, 0x302e, 0x2fe3, 0x1dfc, 0x2138, 0x2845, 0xcc6b, 0xa02b, 0x2f85, 0x7b9a, 0x22fe, 0xdd9e, 0x446e,
    0x28ae, 0x2780, 0xf6c7, 0xa704, 0x779b, 0xef8b, 0x72a0, 0x8197, 0x8344, 0x7281, 0xa0b6, 0xb218, 0x3e1b, 0xf4b4, 0xf661, 0x01a2,
    0xb3a9, 0x9ea1, 0x4aa0, 0x0802, 0x8a5a, 0xf5cc, 0x9f12, 0xe818, 0x9602, 0x615b, 0x49ca, 0x5175, 0x6629, 0x4c89, 0x4711, 0x64cc,
    0x8b7a, 0xc4e7, 0xa4ff, 0xbf7d, 0x8601, 0x62e3, 0xc26f, 0x4a4d, 0xe5ef, 0xbc8a, 0x42eb, 0xcb11, 0xad60, 0xb9b1, 0x2cf7, 0x3af5,
    0x5e76, 0x9a43, 0xec6e, 0xa458, 0x18da, 0x5239, 0x1978, 0xe190, 0x87d9, 0xab30, 0x8fdb, 0x216a, 0x7a17, 0xbe78, 0x920f, 0x287a,
    0xf354, 0x61b0, 0xa221, 0x0799, 0xeea8, 0x4088, 0x8a64, 0xcbf2, 0x4e83, 0x6f0d, 0xf1fe, 0xe90c, 0x931d, 0x2b63, 0xd950, 0xce8c,
    0x65da, 0x8c67, 0xaecb, 0x2107, 0x177a, 0x0df0, 0x2d8f, 0x5386, 0xb7cc, 0xbfe8, 0x1394, 0xa732, 0x41ad, 0xbe4a, 0xa03d, 0x3993,
    0x0b0d, 0xb648, 0x2a67, 0xcc5f, 0x941f, 0x5e50, 0xbc65, 0xad04, 0xddd5, 0x0f25, 0xda4c, 0xe18d, 0x9ac4, 0x6be9, 0x5136, 0x256a,
    0x3e3b, 0xd494, 0xd737, 0x4789, 0xfc54, 0x9ed9, 0x32d8, 0xfb03, 0xbebf, 0x55c8, 0x9fb8, 0x42b2, 0x9248, 0x6f3d, 0xc1ce, 0xd8f1,
    0x7e26, 0xcb65, 0xd914, 0x8ac8, 0x675e, 0x2af5, 0x5ecd, 0x21f8, 0xe885, 0x0b9f, 0x24da, 0x9f80, 0x7a8a, 0x23e5, 0xd78e, 0xfe30,
    0xd8ab, 0x247c, 0x3926, 0xbeb8, 0x52cf, 0xef8e, 0x77a5, 0xd1b5, 0xa331, 0x0682, 0xe4b8, 0xfad6, 0x7a61, 0xc80e, 0x8162, 0x76b1,
    0xd4aa, 0xe909, 0x9618, 0x7b41, 0xf925, 0xba8f, 0x21d4, 0xc4a9, 0xeab1, 0x1dbd, 0x6079, 0x7ae3, 0x4a8c, 0x242e, 0x6b74, 0xccab,
    0x60eb, 0xe871, 0xff6b, 0x92fb, 0xdc8e, 0x4575, 0x22be, 0x9dde, 0x06c2, 0xa4f8, 0xb87a, 0xf637, 0x57f4, 0x8192, 0x8641, 0x22a3,
    0x80c3, 0xc61b, 0x7a15, 0xbc7a, 0xb21b, 0x3d18, 0xc4aa, 0xe9b2, 0x2da3, 0x7faa, 0x56e2, 0x868f, 0xec6d, 0xa75b, 0x28c4, 0x4dea,
    0x3579, 0x2d93, 0x4f9a, 0x671f, 0x6bb4, 0x0c6b, 0xa71f, 0x6c80, 0x4f6e, 0x93eb, 0xdd95, 0x4f65, 0x98e0, 0x6ddb, 0x053e, 0x6b19,
    0xa1c6, 0xd363, 0x57f1, 0x8497, 0xd663, 0x02d6, 0xf4c0, 0x8215, 0x32db, 0xf800, 0x8ea1, 0x4a1b, 0xb3b9, 0x8eb1, 0x5a0b, 0xa312,
    0x25a1, 0xf5f0, 0xa32e, 0x199d, 0x0475, 0x3159, 0x499f, 0x0420, 0x640c, 0x4bba, 0x0313, 0x200e, 0x0f78, 0x8711, 0x63f8, 0xc87f,
    0xf013, 0x15ea, 0xbf76, 0x8d0a, 0xd2ad, 0x8834, 0xb9b4, 0x29f2, 0x6ad7, 0x7e03, 0xee40, 0xa860, 0xec96, 0x5ca0, 0x6e83, 0x6e7b,
    0x9683, 0xe0da, 0xdc98, 0x5363, 0x5229, 0x0968, 0xf13b, 0x2cc9, 0x04cb, 0x8fe7, 0x1d56, 0x8b92, 0x2c0f, 0xc20d, 0x282f, 0xa601,
    0x6395, 0xa512, 0x439b, 0xaa6a, 0xc48a, 0xc992, 0x0cf5, 0x3981, 0x191f, 0x86f7, 0x9415, 0x545a, 0x1c21, 0xedee, 0x35d3, 0x8739,
    0x4bd0, 0x6979, 0xe3b0, 0x85ef, 0xbf10, 0xeb6c, 0xd16b, 0x7def, 0x31b1, 0xa177, 0x62d2, 0xf35e, 0x6bba, 0x0265, 0x4773, 0x06ae,
    0xc894, 0x1bf8, 0x4306, 0x37f7, 0x810b, 0x1fd8, 0x270a, 0x7c4d, 0x8218, 0x3fd6, 0x2872, 0xfb5c, 0xe1e0, 0xf7a9, 0xd861, 0xeeb6,
    0x5e96, 0x7aa3, 0x0acc, 0x6682, 0xe722, 0x5351, 0x601b, 0x1881, 0x0962, 0xfb31, 0x8c8d, 0x4421, 0x67e1, 0x954a, 0x1a0e, 0xa4fb,
    0xbb79, 0xc629, 0x4827, 0xad93, 0x4a42, 0xeae0, 0x4cec, 0x2274, 0x5714, 0x6172, 0x60e3, 0xe079, 0x7f3b, 0xc773, 0x0376, 0x456b,
    0x3ca0, 0x6d19, 0xc7fc, 0x8cf9, 0x3055, 0x5498, 0xdee3, 0x0a0e, 0xa440, 0x00c2, 0xc2c2, 0xe7e0, 0x9193, 0x87fb, 0x8912, 0x8e99,
    0x7223, 0x0214, 0x3602, 0x65f5, 0xa348, 0x7ffb, 0x07b3, 0xc482, 0xc19a, 0x8ca5, 0x6c09, 0xc6e7, 0x86e9, 0x8a0b, 0xa49d, 0xdd1f,
    0xc5ef, 0xbdfc, 0x2596, 0xc2c7, 0xe2e5, 0xc1b1, 0xa78e, 0xfd11, 0xca97, 0x3aed, 0x466e, 0x0ab8, 0x12f6, 0xd45b, 0x18f8, 0x701b,
    0x183a, 0xb2d9, 0xffda, 0x234a, 0x7821, 0xaa58, 0xf6b8, 0xd87b, 0xf4ac, 0xee79, 0x9159, 0x4d31, 0xeea2, 0x4a82, 0x2a20, 0x8b18,
    0xa685, 0xe711, 0x6062, 0x61f8, 0xea69, 0xc565, 0x3776, 0x008a, 0x8a8a, 0x251c, 0x484d, 0xc7f9, 0x89fc, 0x6077, 0x74ed, 0xaae0,
    0x4e00, 0xec8e, 0x44b8, 0xfe78, 0x90e3, 0xe680, 0xe0f8, 0xfeba, 0x5221, 0x0160, 0x716b, 0x7941, 0xdb33, 0x8ff9, 0x0348, 0x7b55,
    0xed31, 0xea0c, 0xa000, 0x04ae, 0xea82, 0x2e8e, 0x619a, 0x880b, 0x868b, 0xe869, 0xe773, 0x0200, 0x2216, 0x3576, 0x229c, 0xbffc,
    0x0780, 0xf7b1, 0xc079, 0x7e4d, 0xa00e, 0x0aa0, 0x0aee, 0x44a0, 0xe660, 0x0018, 0x1818, 0x90fb, 0xfe98, 0x7003, 0x0022, 0x2222,
    0x0142, 0x5349, 0x7803, 0x887a, 0xf7fa, 0x8b32, 0x8caf, 0x6603, 0x66a3, 0xc603, 0x620d, 0x2c81, 0x4c83, 0x4d1b, 0xc488, 0xcb90,
    0x2ce1, 0x2ce3, 0x2ee1, 0x0ef5, 0x1b97, 0x2c69, 0xa46b, 0x2be9, 0x53da, 0xeb90, 0x2d97, 0x4b9e, 0x2737, 0x4170, 0x6397, 0xa710,
    0x638f, 0xbf08, 0xf374, 0x4190, 0x8377, 0x41b2, 0xa155, 0x40f0, 0xf21c, 0x38f3, 0x7a66, 0xcf09, 0xf154, 0x43a6, 0x9757, 0x2505,
    0x5154, 0x4708, 0x7dd5, 0x0b8b, 0x30ce, 0xcf03, 0xfb5e, 0xe3e2, 0xd7bd, 0xcd03, 0xd948, 0xd694, 0xf521, 0x72ff, 0xdec8, 0x2125,
    0x3558, 0x0cb2, 0x7ec6, 0x2b85, 0x3fb6, 0x4812, 0x98a6, 0x2b9d, 0x27ae, 0xd8e9, 0x663e, 0x5b9e, 0x278c, 0xfacb, 0x677c, 0x08d7,
    0x5f8f, 0x72b1, 0x9086, 0x83e5, 0xd320, 0x14b2, 0xf625, 0x45e6, 0xb12d, 0x3833, 0xbaa6, 0x08fd, 0x75a5, 0xf3a3, 0x9647, 0x241e,
    0x5b44, 0xfd56, 0x8dd0, 0x0877, 0xff2f, 0xd6bf, 0xde0a, 0xe3e7, 0xd2b8, 0x9d21, 0xf93d, 0xa297, 0xb12f, 0x3a31, 0x9ab2, 0x1d9f,
    0x425b, 0x7ba1, 0x19c5, 0x5c2d, 0xe30e, 0x3b51, 0xebd9, 0x64de, 0x9968, 0xf458, 0x1a8d, 0x2778, 0x0e3f, 0xd15d, 0x4bd9, 0x6070,
    0x73ea, 0xdad6, 0x7b17, 0xaf73, 0x88b4, 0x3934, 0xacaa, 0x6270, 0x51fc, 0xefa0, 0x598b, 0x108f, 0x8f34, 0xce85, 0x6cd3, 0x1c3d,
    0xf1f2, 0xe500, 0x5365, 0x542f, 0x6954, 0xce9d, 0x74cb, 0x8cc6, 0x0f6a, 0x9503, 0x5347, 0x760d, 0x6816, 0x9dd4, 0x0cc8, 0x04bc,
    0xf890, 0x1e31, 0xdfe8, 0x100e, 0x0eb5, 0x5bd7, 0x6ec5, 0x283d, 0xb413, 0x532a, 0x1b60, 0xdb9e, 0x2254, 0x7734, 0x4024, 0x26c8,
    0xaf84, 0x7f43, 0xbf0b, 0xf077, 0x718e, 0x9ca4, 0x6db3, 0x6d56, 0x88b3, 0x3e33, 0xdc9c, 0x5767, 0x1201, 0x23ac, 0x9ec7, 0x2cc6,
    0x0bc4, 0x7f81, 0x7dc9, 0x1797, 0xe01d, 0x1b5f, 0xe4a1, 0xe3cf, 0xfa90, 0x3c27, 0xea9e, 0x3292, 0xb149, 0x5c57, 0x9974, 0xe844,
    0xca5e, 0xf324, 0x11c0, 0xd170, 0x66f4, 0x9154, 0x403c, 0x3ed0, 0x3f7f, 0x81db, 0xcf08, 0xf055, 0x53ac, 0x9de6, 0x3efa, 0x1555,
    0x00c9, 0xc9c9, 0x57ae, 0xdbc8, 0x7402, 0x450f, 0x58c4, 0x4ecb, 0x2745, 0x3302, 0x30d2, 0xd31f, 0x2b8d, 0x37be, 0xc842, 0xcd2e,
    0xf465, 0x27b0, 0xc6f7, 0x96f9, 0x9aa0, 0x0f8d, 0x72e4, 0xc5d3, 0x81c0, 0xd413, 0x50b0, 0xb2e7, 0xc1e4, 0xf2db, 0xff34, 0xcda4,
    0x7eef, 0x02ac, 0x8eba, 0x5100, 0x135c, 0x6ffa, 0x0609, 0x6f33, 0xcfc0, 0x389d, 0x1408, 0x4c9f, 0x5107, 0x145b, 0x1fcc, 0x331e,
    0x2cce, 0x03cc, 0xffd1, 0x2841, 0xc86f, 0xe003, 0x0541, 0x1466, 0x22f1, 0xd291, 0xb408, 0x4831, 0xbb85, 0x3ad5, 0x7e56, 0xbb15,
    0xaa45, 0xeba5, 0x18a2, 0x2a41, 0xea79, 0xd575, 0x27dd, 0xab9a, 0x2571, 0x2520, 0x7471, 0x367c, 0x1b8b, 0x3075, 0x74b8, 0xffb5,
    0x4c25, 0xebbd, 0x00ba, 0xbaba, 0x14e1, 0xa576, 0x27ff, 0x89b8, 0x2433, 0x7669, 0x0c72, 0xbe06, 0xec71, 0xbb47, 0xf817, 0x99b6,
    0x2a86, 0x2dbe, 0x62b7, 0x963b, 0x5862, 0xe86d, 0xe377, 0x4228, 0x08d2, 0x5a8a, 0x2293, 0xb0f3, 0xf7e6, 0x972e, 0x5c7c, 0xb25f,
    0x795c, 0xc62e, 0x4f20, 0xdda5, 0x7f55, 0xa91d, 0x80e0, 0xe538, 0x6b5d, 0xe582, 0xd1e7, 0xf163, 0x7491, 0xd69c, 0xfd29, 0xf2af,
    0x8b40, 0xfedd, 0x3546, 0x12ac, 0x8e01, 0xeabb, 0x17b7, 0xc03d, 0x3a09, 0xa28a, 0xac32, 0xfae8, 0x445f, 0x199f, 0x0677, 0x114d,
    0x5cfd, 0x33de, 0xec0e, 0xc438, 0x7b20, 0x9844, 0xc97f, 0xe118, 0x0f51, 0xae38, 0xd2f4, 0xd16d, 0x7be9, 0x518d, 0x9ed1, 0x3ad0,
    0x7b53, 0xeb37, 0x8a30, 0x9fa6, 0x5cac, 0x628f, 0xae03, 0xe9cf, 0x50de, 0xdc89, 0x4272, 0x5288, 0xa8c9, 0x453f, 0x68f4, 0x7f36,
    0xca7e, 0xd304, 0x3096, 0x975b, 0x2909, 0x912c, 0x3844, 0xcdd1, 0x0b9a, 0x21df, 0xcfa2, 0x5aff, 0x57e6, 0x9380, 0xb6fe, 0x9cd1,
    0x18c6, 0x4e25, 0xc9ab, 0x35cc, 0x9826, 0xab1d, 0xa2f6, 0xd04e, 0x49c1, 0x5a7e, 0xd667, 0x06d2, 0xb4e8, 0xa8d1, 0x5d27, 0xf80f,
    0x81ae, 0xba7d, 0xd326, 0x12b4, 0x9619, 0x7a40, 0xe92f, 0xb03e, 0x3a2b, 0x80a8, 0xad70, 0xa9a1, 0x3c5c, 0x91e5, 0xf18d, 0x9a7f,
    0xd052, 0x55dd, 0x8aad, 0x023b, 0x192d, 0xb4c5, 0x85fc, 0xac03, 0xcbd9, 0x65a8, 0xfe15, 0xfd8e, 0x5508, 0x5f78, 0x8546, 0x16b9,
    0xdf38, 0xc0de, 0xd9ea, 0x7436, 0x713b, 0x2911, 0x8934, 0xa8bf, 0x3349, 0x7b99, 0x21fd, 0xed80, 0x5bbd, 0x04af, 0xeb83, 0x3e84,
    0x6b2b, 0x93f4, 0xc28a, 0xafa8, 0x536f, 0x5e25, 0xc910, 0x8e77, 0x9ccd, 0x04da, 0x9ef6, 0x1df7, 0x2a33, 0x980b, 0x8630, 0x53d2,
    0xe398, 0xadc7, 0x1e16, 0xf8cf, 0x416e, 0x7d89, 0x57d7, 0xa2b1, 0x9709, 0x7b5b, 0xe33f, 0x0a60, 0xca2e, 0x8354, 0x6291, 0xb01d,
    0x1908, 0x91e0, 0xf488, 0xca5d, 0xf027, 0x21de, 0xcea3, 0x4af5, 0x5d57, 0x887f, 0xf2ff, 0xdb10, 0xacda, 0x1200, 0x22ad, 0x8ecd,
    0x2677, 0x103b, 0x3b80, 0x3a08, 0xa38b, 0xbc38, 0xf059, 0x5fa0, 0x5d9e, 0x41b6, 0xa551, 0x00d8, 0xd8d8, 0x570f, 0x7a69, 0xc006,
    0x0132, 0x2339, 0x0b52, 0xe917, 0x8806, 0x8b86, 0x381b, 0x928e, 0xa9fb, 0x6606, 0x63a6, 0x9621, 0x4278, 0x5882, 0x088d, 0x05d5,
    0x80f2, 0xf72a, 0x5be2, 0x5bf0, 0x49e2, 0x795d, 0xc72f, 0x5f2a, 0xd714, 0x64aa, 0xed1c, 0xc721, 0x5124, 0x3778, 0x0e84, 0x6ae6,
    0x4f32, 0xcfb7, 0x4fea, 0x176f, 0x18e5, 0x6d06, 0xd8e3, 0x6c34, 0xfbda, 0x6766, 0x12cd, 0xef60, 0x994b, 0xd77b, 0x0bc5, 0x7e80,
    0x6dc3, 0x1d26, 0xfbe2, 0x5f5e, 0xa360, 0x57d3, 0xa6b5, 0xd721, 0x519f, 0x8cc3, 0x0a6f, 0xc521, 0x7332, 0x020e, 0x2c18, 0xd51a,
    0x48b2, 0x3806, 0x8f93, 0x6922, 0xb8eb, 0x67a6, 0xd20d, 0x2894, 0x1dba, 0x677e, 0x0ad5, 0x7f9b, 0x67d3, 0xa778, 0x0be7, 0x5ca2,
    0x6c81, 0x4e6f, 0x83e1, 0xd724, 0x549a, 0xdce1, 0x2a1a, 0xb122, 0x373c, 0x4ac0, 0x6862, 0xe9a0, 0x3fb1, 0x4f15, 0xe890, 0x1e8a,
    0x6453, 0x14e5, 0xa172, 0x67d7, 0xa37c, 0x4bcf, 0x7666, 0x037d, 0x4e60, 0x8cee, 0x2742, 0x3405, 0x40e4, 0xe608, 0x6870, 0xfbb2,
    0x0f0e, 0xf167, 0x7095, 0x96b4, 0xd7ed, 0x9d53, 0x8b4f, 0xf1d2, 0xc520, 0x7233, 0x1204, 0x26a9, 0xcee5, 0x0cb3, 0x7fc7, 0x3b8f,
    0x3507, 0x53ed, 0xdca7, 0x6c5c, 0x93b2, 0x84cc, 0x8d38, 0xe09f, 0x99dd, 0x41ed, 0xfe0a, 0xe291, 0xb5c5, 0x94f7, 0xb6b8, 0xda97,
    0x3a56, 0xfdd5, 0x0e53, 0xbd31, 0xe85b, 0xd541, 0x13e9, 0xda4f, 0xe28e, 0xaada, 0x743a, 0x7d37, 0xe969, 0xf678, 0x18bb, 0x3358,
    0x6a88, 0x215c, 0x4c21, 0xefb9, 0x4092, 0x907e, 0x7b1d, 0xa579, 0x28f0, 0x79de, 0x44ac, 0xea6c, 0xc060, 0x6754, 0x20ff, 0xfe89,
    0x6112, 0x0083, 0x8383, 0xb546, 0x1774, 0x03fe, 0xcde3, 0x39a8, 0x3036, 0x37fb, 0x8d07, 0xdfa0, 0x5846, 0xcc49, 0x8209, 0x2ec7,
    0x28d3, 0x5afd, 0x55e4, 0xb394, 0xa39c, 0xab2f, 0x90c4, 0xc1a7, 0xb198, 0x8d86, 0x5e21, 0xcd14, 0xce5f, 0xb609, 0x6b26, 0x9ef9,
    0x12f8, 0xda55, 0xf894, 0x1a35, 0x9fc0, 0x3aca, 0x6149, 0x5bd8, 0x61ca, 0xd85b, 0xd48c, 0xcf2f, 0xd772, 0x02cc, 0xeeda, 0x32fa,
    0xd921, 0xbffd, 0x0681, 0xe7bb, 0xcac8, 0x65b2, 0xe40f, 0x4d61, 0xbef2, 0x1885, 0x0d66, 0xbb19, 0xa649, 0x2bdd, 0x67ee, 0x9a45,
    0xea68, 0xc464, 0x277c, 0x0a3b, 0x9175, 0x611d, 0x0f8c, 0x73e5, 0xd5d9, 0x8b71, 0xcfec, 0x14b1, 0xf526, 0x75f8, 0xaefe, 0x1432,
    0x76a5, 0xc0be, 0xb98a, 0x17cc, 0xbb46, 0xf916, 0x89bc, 0x2037, 0x3641, 0x26b6, 0xd1fa, 0xec7e, 0xb448, 0x0871, 0xf929, 0xb683,
    0xe1ac, 0xbbe5, 0x5ab5, 0x1dac, 0x7168, 0x7a42, 0xeb2d, 0x902a, 0x2f49, 0xb756, 0x2572, 0x2623, 0x446f, 0x29af, 0x378a, 0xfc76,
    0xbcfb, 0x339a, 0xa84a, 0xc6bc, 0xddb2, 0x6842, 0xc980, 0x1ee7, 0x093e, 0xa76d, 0x1ef2, 0x1c2b, 0xe7e4, 0x9597, 0xc7d3, 0xa3d6,
    0xe165, 0x722c, 0x0d1b, 0xc664, 0x056a, 0x3f4d, 0xb3e9, 0xdee1, 0x080c, 0x8454, 0x15a0, 0xf53c, 0x6fe2, 0x1e11, 0xffc8, 0x3158,
    0x489e, 0x142a, 0x6ebd, 0x5045, 0x4712, 0x67cf, 0xbb64, 0xdb34, 0x88fe, 0x737e, 0x4e42, 0xaecc, 0x2600, 0x674c, 0x38e7, 0x6e72,
    0x9f8a, 0x7080, 0x83a1, 0x9764, 0x1636, 0x50b7, 0xb5e0, 0xb1d2, 0xc7cc, 0xbcc9, 0x01a8, 0xb9a3, 0x3ee5, 0x0a4a, 0xe004, 0x0246,
    0x6450, 0x17e6, 0x916c, 0x7804, 0x8f7d, 0x87cc, 0xbe25, 0xcf52, 0xaa0f, 0xa1ef, 0xfa4a, 0xe6fd, 0x9d85, 0x5d99, 0x46b1, 0xd567,
    0x35cf, 0x9b25, 0x9b03, 0xbd25, 0xfc4f, 0x85c2, 0x923d, 0x1a48, 0xe2bd, 0x99e9, 0x75d9, 0x8fdf, 0x256e, 0x3a3f, 0x94bc, 0xfdf3,
    0x2875, 0xfc5b, 0x91d6, 0xc2be, 0x9b9c, 0x22ba, 0x99da, 0x46ea, 0x8e3c, 0xd786, 0xf638, 0x58fb, 0x71f4, 0xe6de, 0xbea6, 0x4cd1,
    0x1f49, 0xb69b, 0xf9b4, 0x2b1e, 0xa42d, 0x6daf, 0x714a, 0x5860, 0xea6f, 0xc363, 0x574a, 0x3f2c, 0xd288, 0xad11, 0xc8c0, 0x4fac,
    0x5129, 0x3a75, 0xdef6, 0x1f1b, 0xe4c9, 0x8ba7, 0x193a, 0xa3d2, 0xe561, 0x3204, 0x27df, 0xa998, 0x0565, 0x3042, 0x438f, 0xbe7e,
    0x9409, 0x4846, 0xccf2, 0x39b2, 0x2a2c, 0x8714, 0x66fd, 0x985d, 0xd066, 0x61e9, 0xfb78, 0xc5c4, 0x96d7, 0xb48e, 0xceb7, 0x5ee1,
    0x0dd4, 0x09ab, 0x32f8, 0xdb23, 0x9fe9, 0x13e3, 0xd045, 0x42ca, 0xea30, 0x9c3c, 0xf52b, 0x78f5, 0x7e8c, 0x61cf, 0xdd5e, 0x84ae,
    0xef5a, 0xa371, 0x46c2, 0xa614, 0x7680, 0xe59b, 0xc8fe, 0x7192, 0x80b8, 0xbd60, 0xb90a, 0x974c, 0x3e1e, 0xf1b1, 0xa643, 0x21d7,
    0xc7aa, 0xdaaf, 0x026e, 0x4c78, 0xb6e0, 0x82cf, 0xe801, 0x8f1b, 0xe1aa, 0xbde3, 0x3a89, 0x220a, 0x296a, 0xf24f, 0x6ba0, 0x187f,
    0xf79c, 0xed54, 0x8f69, 0x93d8, 0xeea6, 0x4e86, 0x6a08, 0xa1dc, 0xc979, 0xe71e, 0x6f6d, 0x919e, 0x8af6, 0x5960, 0xfb64, 0xd9d8,
    0x4604, 0x60d2, 0xd148, 0x5ecc, 0x20f9, 0xf88f, 0x012e, 0x3f25, 0xdb81, 0x3d4b, 0x97f9, 0x8bab, 0x1536, 0x63aa, 0x9a2d, 0x8200,
    0x27ce, 0xb889, 0x05c4, 0x91e3, 0xf78b, 0xfa43, 0xeff4, 0x0ddf, 0x02a0, 0x82b6, 0x9178, 0x6c10, 0xdffe, 0x0618, 0x7e22, 0xcf61,
    0x993c, 0xa00c, 0x08a2, 0x2afa, 0x51c2, 0xd19e, 0x881a, 0x979a, 0xe8c8, 0x46d2, 0xb604, 0x662b, 0x4e8b, 0x6705, 0x71ae, 0xbc84,
    0x4ce5, 0x2b7d, 0xc74e, 0x3e4b, 0xa4e4, 0xa466, 0x26e4, 0x83a8, 0x9e6d, 0x866c, 0x0f8e, 0x71e7, 0xf5cd, 0x9e13, 0xf812, 0x9cb3,
    0x7aa4, 0x0dcb, 0x16b4, 0xd235, 0x10ac, 0xac17, 0xdfcd, 0x352b, 0x7fc1, 0x3d89, 0x553b, 0x6c4b, 0x84a5, 0xe451, 0x133f, 0x0c99,
    0x55ed, 0xba9d, 0x33c6, 0xf416, 0x54c3, 0x85b8, 0xe847, 0xc95d, 0xc33a, 0x0e13, 0xfd71, 0xaaf7, 0x5917, 0x8c13, 0xdabf, 0x127e,
    0x5cd3, 0x1df0, 0x2d34, 0xe83d, 0xb327, 0x102f, 0x2f94, 0x6a8b, 0x225f, 0x7c3f, 0xf06a, 0x6c93, 0x5c7d, 0xb35e, 0x6956, 0xcc9f,
    0x54df, 0x99a4, 0x3894, 0x1d01, 0xdcc5, 0x0e3e, 0xd05c, 0x5bd3, 0x6ac1, 0x6815, 0x9ed7, 0x3cd6, 0x1b6f, 0xd491, 0xd232, 0x17ab,
    0xdc21, 0xeada, 0x76d6, 0xb3cd, 0xfac5, 0x6972, 0xe8bb, 0x35a1, 0xf54b, 0x1895, 0x1d76, 0xabb2, 0x0d59, 0x8426, 0x67d2, 0xa679,
    0x1bed, 0x5613, 0x777e, 0x0a6e, 0xc420, 0x6338, 0x08bf, 0x37e7, 0x911b, 0x0f73, 0x8c1a, 0xd3b6, 0x8224, 0x03ea, 0xd9f7, 0x692b,
    0xb1e2, 0xf7fc, 0x8d34, 0xec93, 0x59a5, 0x3ea1, 0x4e0e, 0xe280, 0xa4d4, 0x9456, 0x1719, 0x6e93, 0x7e6b, 0x8628, 0x4bca, 0x7363,
    0x535f, 0x6e15, 0xf8ed, 0x634c, 0x7ccb, 0x049e, 0xdab2, 0x1f73, 0x8ca1, 0x680d, 0x86cf, 0xac2d, 0xe5f7, 0xa492, 0xd210, 0x3589,
    0xdd63, 0xb993, 0x0ed5, 0x3bb7, 0x0d3f, 0xe240, 0x6414, 0x53a2, 0x93e8, 0xde96, 0x7f7b, 0x8733, 0x41da, 0xc93d, 0xa35a, 0x6de9,
    0x370c, 0x7af0, 0x599f, 0x049b, 0xdfb7, 0x4f51, 0xacd4, 0x1c0e, 0xc2c1, 0xe4e3, 0xa18d, 0x9828, 0xa513, 0x429a, 0xba60, 0xce3b,
    0xd26d, 0x48f4, 0x7e40, 0xad03, 0xdad2, 0x7f13, 0xef5b, 0xa270, 0x56c8, 0xaca5, 0x6d7f, 0xa19a, 0x8f3f, 0xc58e, 0xdc9d, 0x5666,
    0x020b, 0x291d, 0x8538, 0x68c7, 0x4c05, 0xcb9d, 0x21ec, 0xfc91, 0x5b1c, 0xa50e, 0x5f87, 0x7ab9, 0x10d6, 0xd66d, 0x0cd8, 0x14ac,
    0xe83b, 0xb521, 0x7013, 0x1032, 0x3289, 0xaa52, 0xfcb2, 0x783f, 0xb446, 0x067f, 0x1945, 0xdcad, 0x6656, 0x33f6, 0xc426, 0x653e,
    0x6883, 0x0841, 0xc919, 0x877e, 0x0c97, 0x5be3, 0x5af1, 0x59e8, 0x73ec, 0xdcd0, 0x1b2b, 0x90d5, 0xd0b6, 0xb139, 0x2c27, 0xea25,
    0x8929, 0xb5a2, 0xf390, 0xa574, 0x25fd, 0xa9ac, 0x3151, 0x4197, 0x8470, 0x3184, 0x9442, 0x030d, 0x3e10, 0xffbf, 0x462f, 0x4bf9,
    0x4050, 0x52bc, 0x9cfd, 0x34ea, 0xaf0b, 0xf0cc, 0xca35, 0x984f, 0xc274, 0x5156, 0x450a, 0x5dc1, 0x1ee9, 0x0730, 0x4701, 0x74dc,
    0x9bd1, 0x6ff7, 0x0b04, 0xbf41, 0xba3d, 0x9366, 0x5018, 0x1a4f, 0xe5ba, 0xe9df, 0x40ce, 0xcc22, 0xe962, 0xfd73, 0xa8f5, 0x7903,
    0x9971, 0xed41, 0x9a7c, 0xd351, 0x65c3, 0x957e, 0x2e3a, 0xd52e, 0x7c86, 0x49d3, 0x486c, 0xe6d8, 0xb8a0, 0x2ced, 0x20ef, 0xee99,
    0x71b9, 0xab93, 0x2c78, 0xb57a, 0x2b48, 0xf27b, 0x5f94, 0x69aa, 0x3063, 0x62ae, 0x8f22, 0xd893, 0x1c44, 0x888b, 0x060b, 0x6d31,
    0xefd4, 0x2dff, 0x23f6, 0xc49d, 0xde85, 0x6c68, 0xa786, 0xf519, 0x4ac7, 0x6f65, 0x9996, 0x0aa6, 0x0ce8, 0x249c, 0xd9c6, 0x581a,
    0x9015, 0x1076, 0x76cd, 0xa8d6, 0x5a20, 0x8839, 0xb4b9, 0xf980, 0x1f2a, 0xd5f8, 0xaa50, 0xfeb0, 0x582b, 0xa124, 0x3181, 0x9147,
    0x532f, 0x1e65, 0x8bbc, 0x0221, 0x0337, 0x042a, 0x6e06, 0xebfe, 0x43f9, 0xc808, 0x8764, 0x168d, 0xeb0c, 0xb10b, 0x1e15, 0xfbcc,
    0x7170, 0x625a, 0x7bd6, 0x6eb2, 0x5f4a, 0xb774, 0x0750, 0x2761, 0x1726, 0x51ac, 0xbff0, 0x0b8c, 0x37c9, 0xbf35, 0xce49, 0xa01f,
    0x1bb1, 0x0a4f, 0xe501, 0x5264, 0x4425, 0x63e5, 0xd562, 0x30ca, 0xcb07, 0xbb76, 0xc926, 0xb841, 0xcd0c, 0xd647, 0x26f2, 0x95be,
    0xeefa, 0x12da, 0xf877, 0xf9d6, 0x497c, 0xe7c3, 0xb2b0, 0x96b3, 0xd0ea, 0xed65, 0xbe58, 0xb22f, 0x092c, 0xb57f, 0x2e4d, 0xa259,
    0x7fe1, 0x1da9, 0x746d, 0x2a60, 0xcb58, 0xe429, 0x6b47, 0xff98, 0x6108, 0x1a99, 0x336c, 0x5ebc, 0x5089, 0x8bde, 0x6043, 0x40d9,
    0xdb35, 0x89ff, 0x6374, 0x44f3, 0xb533, 0x6201, 0x208d, 0x8cfb, 0x3257, 0x748c, 0xcb81, 0x3df0, 0x2c42, 0x8f40, 0xbaf1, 0x5faa,
    0x5794, 0xe1f2, 0xe5bb, 0xe8de, 0x50c4, 0xc693, 0xf29d, 0xb972, 0xef34, 0xcd1f, 0xc554, 0x0647, 0x217d, 0x6d00, 0xdee5, 0x0c08,
    0xc47c, 0x3f64, 0x9ac0, 0x6fed, 0x111e, 0x0fae, 0x51c7, 0xd49b, 0xd838, 0xb7ef, 0x9ccb, 0x02dc, 0xfeca, 0x2251, 0x7231, 0x1006,
    0x06bd, 0xdb87, 0x3b4d, 0xf7c5, 0xb40d, 0x4d34, 0xeba7, 0x1aa0, 0x0a55, 0xff1b, 0xe28b, 0xafdf, 0x2418, 0x5d42, 0x9d6a, 0xb276,
    0x5075, 0x7722, 0x5632, 0x565f, 0x3b32, 0x88ba, 0x373a, 0x4cc6, 0x085e, 0xd606, 0x67b3, 0xc718, 0x681d, 0x96df, 0xbc86, 0x4ee7,
    0x0b69, 0xd22c, 0x09b5, 0x2ce6, 0x2be4, 0x5ed7, 0x3be2, 0x586a, 0xe065, 0x6327, 0x17a0, 0xd72a, 0x5a94, 0x3c8d, 0x4034, 0x36d8,
    0xbf2f, 0xd453, 0x10f0, 0xf04b, 0x4db2, 0x6d21, 0xffc4, 0x3d54, 0x88e6, 0x6b66, 0xdeb9, 0x5054, 0x5603, 0x676e, 0x1ac5, 0x6f30,
    0xccc3, 0x0883, 0x0bdb, 0x609e, 0x9d04, 0xdc18, 0xd3e3, 0xd771, 0x01cf, 0xdec4, 0x2d29, 0xf520, 0x73fe, 0xcec2, 0x2b94, 0x2ea7,
    0x48b3, 0x3907, 0x9f99, 0x6393, 0xa314, 0x23a7, 0x95cc, 0x9c88, 0x419f, 0x8c78, 0xb1d4, 0xc1ca, 0xdcf5, 0x3e0e, 0xe1a1, 0xb6e8,
    0x8ac7, 0x6851, 0xda93, 0x3e52, 0xbdfd, 0x2497, 0xd2cd, 0xe854, 0xda4e, 0xe38f, 0xbad0, 0x7e8b, 0x66c8, 0xad68, 0xb1b9, 0xaca7,
    0x6f7d, 0x818e, 0x9a5d, 0xf270, 0x549f, 0xd9e4, 0x7a38, 0x9157, 0x433f, 0x0ece, 0x20ac, 0xadda, 0x030b, 0x3816, 0x9f83, 0x7989,
    0x13fb, 0xc85d, 0xd231, 0x14a8, 0xec3f, 0xf509, 0x5ad7, 0x7fce, 0x3286, 0xa55d, 0x0cd4, 0x18a0, 0x2843, 0xca6d, 0xc017, 0x1023,
    0x2398, 0xaaf3, 0x5d13, 0xcc3b, 0xf07b, 0x7d82, 0x5cdc, 0x12ff, 0xdd52, 0x88a2, 0x2f22, 0xdc3d, 0xf6c6, 0xa605, 0x6791, 0xe53a,
    0x695f, 0xc596, 0xc485, 0xc69d, 0xfc93, 0x591e, 0x851a, 0x4ae5, 0x4d47, 0x98d4, 0x59ef, 0x74eb, 0xace6, 0x2e3c, 0xd328, 0x1cba,
    0x7675, 0x106e, 0x6ed5, 0x382d, 0xa4b8, 0xf83a, 0xb49b, 0xdba2, 0x1e68, 0x86b1, 0xd253, 0x76ca, 0xafd1, 0x2a16, 0xbd2e, 0xf744,
    0x358c, 0xd866, 0xe9b1, 0x2ea0, 0x4fb4, 0x4931, 0xaa8e, 0x206e, 0x6f18, 0xe4eb, 0xa985, 0x1878, 0xf09b, 0x9d62, 0xba7e, 0xd025,
    0x22aa, 0x89ca, 0x5641, 0x252c, 0x787d, 0xf604, 0x64c7, 0x8071, 0x74a9, 0xeea4, 0x4c84, 0x4a1c, 0xb4be, 0xfe87, 0x6f1c, 0xe0ef,
    0xe9ad, 0x32bc, 0x9f67, 0x9d6d, 0xb571, 0x2043, 0x4235, 0x15cf, 0x9a53, 0xfc7e, 0xb4f3, 0xb3ca, 0xfdc2, 0x1944, 0xddac, 0x765c,
    0x3947, 0xdfd9, 0x213f, 0x2f42, 0xbc5d, 0x953c, 0x6c78, 0xb796, 0xe5b2, 0xe1d7, 0xc09e, 0x99aa, 0x369a, 0xfd6d, 0xb6eb, 0x89c4,
    0x584f, 0xc540, 0x1253, 0x71fe, 0xecd4, 0x1ee2, 0x0c3b, 0xf74f, 0x3e87, 0x6828, 0xa3ea, 0xdd59, 0x83a9, 0x9f6c, 0x9666, 0x053f,
    0x6a18, 0xb1cc, 0xd9d2, 0x4c0e, 0xc096, 0x91a2, 0xb6ca, 0xa8e5, 0x6913, 0x89da, 0x4651, 0x3587, 0xd36d, 0x59ff, 0x64fb, 0xbc4d,
    0x852c, 0x7cd3, 0x1c86, 0x4a49, 0xe1eb, 0xfca2, 0x682f, 0xa4ed, 0xad6f, 0xb6be, 0xdc91, 0x5a6a, 0xc273, 0x5651, 0x353c, 0x68d6,
    0x5d14, 0xcb3c, 0x804d, 0x4895, 0x1f21, 0xdef3, 0x1a1e, 0xb4eb, 0xabd2, 0x6d39, 0xe7dc, 0xadaf, 0x767e, 0x1b65, 0xde9b, 0x7276,
    0x5741, 0x3427, 0x62c6, 0xe74a, 0x3b39, 0x83b1, 0x8774, 0x069d, 0xfba7, 0x1a1b, 0xb1ee, 0xfbf0, 0x4d4c, 0x93df, 0xe9a1, 0x3eb0,
    0x5f1f, 0xe221, 0x0575, 0x2052, 0x5324, 0x156e, 0x3bf2, 0x487a, 0xf0ce, 0xc837, 0xb85b, 0xd716, 0x66a8, 0xcd08, 0xd243, 0x66da,
    0xbf7a, 0x8106, 0x12d5, 0xf778, 0x09b0, 0x29e3, 0x7bc6, 0x7ea2, 0x4fe1, 0x1c64, 0xa8ab, 0x275d, 0x2b1a, 0xa029, 0x2d87, 0x5b8e,
    0x379c, 0xea60, 0xcc6c, 0xa72c, 0x5fb3, 0x4e8d, 0x6103, 0x1192, 0x8322, 0x14e7, 0xa370, 0x47c3, 0xb61e, 0x7c31, 0xfe64, 0x8cff,
    0x3653, 0x34a4, 0xe145, 0x520c, 0x2c4d, 0x804f, 0x4a97, 0x3f35, 0xcb91, 0x2de0, 0x3ce9, 0x2450, 0x150a, 0x5f96, 0x6ba8, 0x1077,
    0x77cc, 0xb8dc, 0x5091, 0x93c6, 0xf0b8, 0xbe41, 0xab36, 0x89dd, 0x4156, 0x45b1, 0xe67a, 0x1a02, 0xa8f7, 0x7b01, 0xb965, 0xf823,
    0xad82, 0x5b53, 0xea41, 0xed4d, 0x9670, 0x1329, 0x1a8f, 0x257a, 0x2e2b, 0xc43f, 0x7c27, 0xe872, 0xfc68, 0xa2e5, 0xc35d, 0x6974,
    0xeebd, 0x559d, 0xcaed, 0x4097, 0x957b, 0x2b3f, 0x850c, 0x5cf3, 0x3dd0, 0x0c62, 0xae16, 0xfcda, 0x1057, 0x57ec, 0x998a, 0x16ba,
    0xdc3b, 0xf0c0, 0xc639, 0x5837, 0xbd38, 0xe152, 0x451b, 0x4cd0, 0x1e48, 0xa691, 0xf305, 0x30e1, 0xe02c, 0x2a6e, 0xc556, 0x0445,
    0x0169, 0x7862, 0xe91b, 0x840a, 0x4bfe, 0x4757, 0x228a, 0xa9ea, 0x7717, 0x6307, 0x3780, 0xf67c, 0x1cbf, 0x7370, 0x404c, 0x4ea0,
    0x4c2e, 0xe0b6, 0xb0f4, 0xf0e1, 0xe718, 0x696b, 0xf1a2, 0xb550, 0x0162, 0x7369, 0x5955, 0xce51, 0xb807, 0x8b4a, 0xf4d7, 0x9502,
    0x5246, 0x6607, 0x62a7, 0x862b, 0x48c9, 0x437d, 0x4c8c, 0x4214, 0x34ee, 0xab0f, 0xb0e4, 0xe0f1, 0xf7b3, 0xc27b, 0x5e59, 0xb56c,
    0x3d5e, 0x82ec, 0xcb22, 0x9e53, 0xb852, 0xde1f, 0xf6f2, 0x9231, 0x1644, 0x22c5, 0xe6a5, 0xc5dd, 0x8fce, 0x347f, 0x3a9e, 0x351d,
    0x49f7, 0x6c48, 0x87a6, 0xd44f, 0x0cec, 0x2098, 0x99ee, 0x72de, 0xffe9, 0x1079, 0x79c2, 0x58b0, 0x3abf, 0x143c, 0x78ab, 0x20d2,
    0xd3a4, 0x9036, 0x3355, 0x6785, 0xf12e, 0x39dc, 0x4442, 0x0482, 0xc6ae, 0xcfa0, 0x58fd, 0x77f2, 0x86e2, 0x8100, 0x14d3, 0x9744,
    0x3616, 0x71e1, 0xf3cb, 0xfe2f, 0xc7b4, 0xc4b1, 0xf2a9, 0x8d46, 0x9ee1, 0x0ae0, 0x4aae, 0x060c, 0x6a36, 0x9fe2, 0x18e8, 0x600b,
    0x0891, 0x19c9, 0x5021, 0x2376, 0x441d, 0x5bdd, 0x64cf, 0x8879, 0xf4f9, 0xbb2c, 0x937c, 0x4a02, 0xaaa0, 0x0e40, 0xae22, 0xc8ee,
    0x6182, 0x9013, 0x1670, 0x16f1, 0x9770, 0x0222, 0x0034, 0x3434, 0x71d5, 0xc7ff, 0x8ffa, 0x004b, 0x4b4b, 0xf2e2, 0xc60d, 0x6c03,
    0xcced, 0x26ad, 0xcae1, 0x4c9b, 0x5503, 0x5473, 0x3508, 0x5ce2, 0x2cc1, 0x0cc3, 0x0fb7, 0x48de, 0x546a, 0x2c11, 0xdc13, 0xd8e8,
    0x673f, 0x4b94, 0x2d3d, 0xe134, 0x237d, 0x4f16, 0xeb93, 0x2e94, 0x7b80, 0x38e4, 0x6d71, 0xaf94, 0x6f53, 0xafa0, 0x5b67, 0xde75,
    0x9c98, 0x518f, 0x9cd3, 0x1ac4, 0x6e31, 0xdcc9, 0x0232, 0x1024, 0x249f, 0xdac5, 0x6804, 0x8fc6, 0x3c77, 0xbace, 0x6095, 0x960f,
    0x6c56, 0x99b8, 0x2488, 0xcdd2, 0x0899, 0x11c1, 0xd071, 0x76fe, 0x9be5, 0x5bc3, 0x7ad1, 0x78be, 0x35c7, 0x932d, 0x1b53, 0xe8ad,
    0x23b7, 0x85dc, 0x8c23, 0xea8f, 0x2383, 0xb1e8, 0xfdf6, 0x2d70, 0xac79, 0xb1a3, 0xb6bd, 0xdf92, 0x6a74, 0xdda0, 0x7a50, 0xf93f,
    0xa095, 0x913b, 0x2f53, 0xad4c, 0x959d, 0xcdd9, 0x0392, 0xa18f, 0x9a2a, 0x8507, 0x57f8, 0x8d9e, 0x4639, 0x5def, 0x30c7, 0xc60a,
    0x6b04, 0xbcdb, 0x13ba, 0x891c, 0x8097, 0x924f, 0x683a, 0xb1f8, 0xede6, 0x3ddb, 0x0769, 0x1e58, 0xb681, 0xe3ae, 0x9bf1, 0x4fd7,
    0x2a52, 0xf96a, 0xf5c0, 0x931e, 0x2860, 0xe94e, 0xd15f, 0x49db, 0x4064, 0x6688, 0xed28, 0xf315, 0x20f1, 0xf087, 0x817e, 0x6aad,
    0x0479, 0x3d55, 0x89e7, 0x7b6c, 0xd408, 0x4bab, 0x1202, 0x20af, 0xaed9, 0x3315, 0x27c5, 0xb382, 0xb58a, 0xdbb8, 0x0472, 0x365e,
    0x39a9, 0x3137, 0x27f1, 0x87b6, 0xc45f, 0x1c47, 0x8b88, 0x3615, 0x72e2, 0xc3d5, 0xe1fc, 0xebb5, 0x08b2, 0x3aea, 0x4169, 0x7a8e,
    0x27e1, 0x97a6, 0xd4f4, 0xb757, 0x2473, 0x3629, 0x4ede, 0x3250, 0x738b, 0xbbb7, 0x08e7, 0x6fbf, 0x434c, 0x7dbd, 0x63e3, 0xd364,
    0x50f6, 0xf4a1, 0xe374, 0x412b, 0x38cc, 0x4559, 0x0e92, 0x7cf0, 0x3fa5, 0x5b01, 0xb813, 0x9f5e, 0xa454, 0x14d6, 0x9241, 0x6634,
    0x5194, 0x87c8, 0xba21, 0x8f7a, 0x80cb, 0xce13, 0xfa45, 0xe9f2, 0x6de3, 0x3d06, 0xdab4, 0x1975, 0xec9d, 0x57ab, 0xdecd, 0x2420,
    0x657a, 0x2cc7, 0x0ac5, 0x6f8b, 0x7778, 0x0c68, 0xa41c, 0x5c9e, 0x50bd, 0xbfea, 0x1196, 0x8726, 0x54cf, 0x89b4, 0x283f, 0xb611,
    0x733e, 0x0e02, 0xec60, 0xaa56, 0xf8b6, 0x3817, 0x9e82, 0x6983, 0x194a, 0xd3a2, 0x9630, 0x5369, 0x5823, 0xa92c, 0xb1d1, 0xc4cf,
    0x8cd7, 0x1e7b, 0x95a2, 0xf2e6, 0xc209, 0x2c2b, 0xe629, 0x4951, 0xcaee, 0x4394, 0xa565, 0x34ec, 0xa90d, 0x90f0, 0xf593, 0xc04d,
    0x4a79, 0xd1db, 0xcd5f, 0x8514, 0x44eb, 0xad2b, 0xf2fa, 0xde15, 0xfcf8, 0x3275, 0x56ae, 0xcac3, 0x6eb9, 0x5441, 0x073a, 0x4d0b,
    0xd498, 0xdb3b, 0x87f1, 0x8318, 0x2edd, 0x32c9, 0xea12, 0xbe1e, 0xf469, 0x2bbc, 0x068f, 0xe9b5, 0x2aa4, 0x0f9c, 0x63f5, 0xc572,
    0x2061, 0x6017, 0x148d, 0xc91a, 0x847d, 0x3c89, 0x4430, 0x76f0, 0x95eb, 0xbbaf, 0x10ff, 0xff44, 0xbdd4, 0x0dbe, 0x63c1, 0xf146,
    0x51b4, 0xa7e8, 0x9b77, 0xc951, 0xcf36, 0xce6b, 0x823d, 0x1af3, 0x5906, 0x9d02, 0xda1e, 0xb3df, 0xe8d7, 0x59cd, 0x56c9, 0xada4,
    0x7d75, 0xab2b, 0x94c0, 0x818f, 0x9b5c, 0xe27a, 0x5e2e, 0xc21b, 0x3e39, 0xd696, 0xf723, 0x52eb, 0xcbaa, 0x16db, 0xbd5a, 0x8330,
    0x06f5, 0x93cf, 0xf9b1, 0x2e1b, 0xf40f, 0x4dda, 0x0549, 0x1c6e, 0xa2a1, 0x8719, 0x6bf0, 0x482f, 0xa59b, 0xca12, 0xbf68, 0x9314,
    0x226a, 0x490a, 0x91b5, 0xa1dd, 0xc878, 0xf714, 0x65dc, 0x8a61, 0xcef7, 0x1ea1, 0x4f78, 0x85fd, 0xad02, 0xdbd3, 0x6f19, 0xe5ea,
    0xb98f, 0x12c9, 0xeb64, 0xd963, 0xfdbf, 0x6439, 0x7e8f, 0x62cc, 0xed40, 0x9b7d, 0xc35b, 0x6f72, 0x8e81, 0x6a3b, 0x92ef, 0xc89a,
    0x15f6, 0xa36a, 0x5dd9, 0x06f1, 0x97cb, 0xb999, 0x04df, 0x9bf3, 0x4dd5, 0x0a46, 0xec08, 0xc23e, 0x1b1c, 0xa7e2, 0x917d, 0x6915,
    0x8fdc, 0x266d, 0x0a21, 0x8b6f, 0xd1f2, 0xe476, 0x3418, 0x5df9, 0x26d1, 0xb69d, 0xffb2, 0x4b22, 0x9b8b, 0x35ad, 0xf947, 0xd8ed,
    0x623a, 0x1bb6, 0x0d48, 0x9537, 0x6773, 0x07d8, 0xafe9, 0x122e, 0x0c83, 0x4ff7, 0x0a72, 0xd83c, 0xb3eb, 0xdce3, 0x2818, 0x9136,
    0x225e, 0x7d3e, 0xe060, 0x6622, 0x4782, 0xf75f, 0x2e97, 0x7883, 0x08fa, 0x72a2, 0x8395, 0xa350, 0x67e3, 0x9748, 0x3a1a, 0xb199,
    0x8c87, 0x4e2b, 0xc7a5, 0xd5a0, 0xf208, 0x2ce7, 0x2ae5, 0x4edd, 0x3153, 0x4395, 0xa464, 0x24e6, 0xa3bc, 0x8b0f, 0xb192, 0x878c,
    0xfe65, 0x8dfe, 0x2659, 0x3e15, 0xfaba, 0x160d, 0x6b8c, 0x3453, 0x16b2, 0xd433, 0x7090, 0x93b1, 0x87cf, 0xbd26, 0xff4c, 0xb5dc,
    0x8dee, 0x3649, 0x2ebe, 0x51aa, 0xb9f6, 0x6bb0, 0x086f, 0xe737, 0x4644, 0x2092, 0x93e4, 0xd29a, 0xbf03, 0xf87f, 0xf1de, 0xc92c,
    0xb24b, 0x6d48, 0x96ad, 0xcef4, 0x1da2, 0x7f66, 0x9a2e, 0x8103, 0x17d0, 0xa75a, 0x29c5, 0x5de0, 0x3fc8, 0x366c, 0x0b9b, 0x20de,
    0xdfa8, 0x504e, 0x4c19, 0xd781, 0xf13f, 0x28cd, 0x44e3, 0xa523, 0x72aa, 0x8b9d, 0x2300, 0x326b, 0x48b0, 0x3a04, 0xaf87, 0x7c40,
    0x8f15, 0xefa4, 0x5d8f, 0x50a7, 0xa5f0, 0xa179, 0x6cdc, 0x1332, 0x0194, 0x859f, 0xcf60, 0x983d, 0xb006, 0x0213, 0x3105, 0x15c3,
    0x965f, 0x3c06, 0xcbbf, 0x03ce, 0xfdd3, 0x0855, 0xdd0d, 0xd7fd, 0x8d43, 0x9be4, 0x5ac2, 0x6adb, 0x720f, 0x2e38, 0xd72c, 0x5c92,
    0x5cb1, 0x7f92, 0x6eda, 0x3722, 0x54de, 0x98a5, 0x289e, 0x17b0, 0xc73a, 0x4a3f, 0x979d, 0xefcf, 0x36e4, 0x8313, 0x25d6, 0x8287,
    0xa049, 0x4de7, 0x3874, 0xfde1, 0x3a67, 0xcce4, 0x2fa4, 0x5abb, 0x13a2, 0x9104, 0x106c, 0x6cd7, 0x1839, 0xb1da, 0xcfc4, 0x3c99,
    0x5420, 0x665b, 0x3efb, 0x1454, 0x10c3, 0xc378, 0x4c51, 0x9fc9, 0x33c3, 0xf113, 0x04e1, 0xa5cd, 0x9c44, 0x8d53, 0x8bf4, 0x4a69,
    0xc1cb, 0xddf4, 0x2e04, 0xeb10, 0xad17, 0xcec6, 0x2f90, 0x6e8f, 0x6277, 0x56fb, 0x9f96, 0x6c9c, 0x5372, 0x4338, 0x09c9, 0x509a,
    0x98cd, 0x40f6, 0xf41a, 0x58cf, 0x45c0, 0x970b, 0x7959, 0xc32b, 0x1f02, 0xfdd0, 0x0b56, 0xed13, 0xc82e, 0xa142, 0x57e7, 0x9281,
    0xa6f4, 0x9660, 0x0339, 0x0a24, 0x8e6a, 0x81d0, 0xc403, 0x401b, 0x19f7, 0x6e1f, 0xf2e7, 0xc308, 0x3c21, 0xec98, 0x52ae, 0x8eef,
    0x0455, 0x1179, 0x68c9, 0x420b, 0x2bf1, 0x4bc2, 0x7b6b, 0xd30f, 0x3b9d, 0x2715, 0x6352, 0x62d5, 0xf459, 0x1b8c, 0x3772, 0x048e,
    0xcaa2, 0x0fd8, 0x27b1, 0xc7f6, 0x86f3, 0x9011, 0x1472, 0x36e5, 0x8212, 0x35dc, 0x8836, 0xbbb6, 0x09e6, 0x7fb5, 0x49fd, 0x6642,
    0x27e2, 0x94a5, 0xe4ea, 0xa884, 0x0872, 0xfa2a, 0x869d, 0xfe7f, 0x97e4, 0x96b6, 0xd5ef, 0xbd47, 0x9e2d, 0xc62c, 0x4d22, 0xfdb1,
    0x6a37, 0x9ee3, 0x08e2, 0x6aba, 0x136e, 0x5dc8, 0x17e0, 0x976a, 0x1838, 0xb0db, 0xdfce, 0x3628, 0x4fdf, 0x225a, 0x793a, 0xa048,
    0x4ce6, 0x287e, 0xf750, 0x2198, 0x88e5, 0x6865, 0xeea7, 0x4f87, 0x7a02, 0xab6d, 0xd286, 0xa31f, 0x28ac, 0x2582, 0xd6d3, 0xb266,
    0x4065, 0x6789, 0xfd22, 0xf9a4, 0x3b0e, 0xb486, 0xc6bf, 0xdeb1, 0x585c, 0xd653, 0x32e6, 0xc53d, 0x6f2e, 0xd2dd, 0xf844, 0xcae5,
    0x489f, 0x152b, 0x7eb7, 0x5af4, 0x5ced, 0x23ce, 0xfca5, 0x6f28, 0xd4db, 0x9878, 0xf543, 0x109d, 0x9d26, 0xfe3a, 0xd2a1, 0x8438,
    0x79cc, 0x56be, 0xdad3, 0x7e12, 0xff51, 0xa8c1, 0x4d37, 0xe8a4, 0x2abe, 0x1586, 0xd31a, 0x2e88, 0x679c, 0xe837, 0xb92d, 0xb06b,
    0x6f7e, 0x828d, 0xaa43, 0xeda3, 0x789e, 0x15e7, 0xb27b, 0x5d78, 0xa750, 0x23cf, 0xfda4, 0x7f22, 0xde6a, 0x8387, 0xb142, 0x575c,
    0x293a, 0xa21f, 0x39a7, 0x3f39, 0xc79d, 0xed98, 0x43a5, 0x9454, 0x151b, 0x4e87, 0x6b09, 0xb1d6, 0xc3c8, 0xfce1, 0x2b6c, 0xd65f,
    0x3eea, 0x0545, 0x1062, 0x62d9, 0xf855, 0xdbf4, 0x483e, 0xb48a, 0xcab3, 0x1ec9, 0x2710, 0x6657, 0x32f7, 0xd42c, 0x6f8f, 0x737c,
    0x4c40, 0x8ed8, 0x3362, 0x50b2, 0xb0e5, 0xe1f0, 0xe7b9, 0xc8ca, 0x45a6, 0xf16d, 0x7a9f, 0x36f0, 0x9707, 0x7555, 0x0353, 0x604e,
    0x4dd4, 0x0b47, 0xfc02, 0xc88f, 0x00e3, 0xe3e3, 0xd6bc, 0xdd09, 0xd3f9, 0xcd6b, 0xb120, 0x353e, 0x6ad4, 0x7d00, 0xde5e, 0xb7b3,
    0xc097, 0x90a3, 0xa6c0, 0xa254, 0x72ec, 0xcddb, 0x0190, 0x819b, 0x8f48, 0xb2f9, 0xdffa, 0x021c, 0x3e0a, 0xe5a5, 0xf6c0, 0xa003,
    0x07ad, 0xda9c, 0x315d, 0x4d9b, 0x4408, 0x4ec8, 0x2446, 0x031c, 0x2f01, 0xff1e, 0xe78e, 0xfffd, 0x046d, 0x2941, 0xd964, 0xfab8,
    0x140f, 0x4b98, 0x2131, 0x214c, 0x5c31, 0xff12, 0xeb82, 0x3f85, 0x7b21, 0x9945, 0xd975, 0xeba9, 0x14ae, 0xea39, 0x9535, 0x6571,
    0x27cc, 0xba8b, 0x25d0, 0x8481, 0xc075, 0x7241, 0x6076, 0x75ec, 0xbaea, 0x44b1, 0xf771, 0x00b9, 0xb9b9, 0x24ff, 0xbaa5, 0x0bfe,
    0x45bb, 0xec70, 0xba46, 0xe81d, 0x9307, 0x3179, 0x69bf, 0x2576, 0x2227, 0x0447, 0x036b, 0x5876, 0xfc79, 0xb3f4, 0xc3fc, 0xc8d5,
    0x5ab9, 0x11a0, 0xb110, 0x050e, 0x5b29, 0x903b, 0x3e58, 0xb7f7, 0x84d3, 0x9227, 0x0052, 0x5252, 0x7213, 0x3224, 0x07ff, 0x88ce,
    0x434e, 0x7fbf, 0x43f7, 0xc606, 0x6708, 0x7ca3, 0x6cf6, 0x3918, 0x8086, 0x835e, 0x689b, 0x1059, 0x59e2, 0x79e6, 0x7c94, 0x5bc1,
    0x78d3, 0x58aa, 0x20a5, 0xa4d3, 0x9351, 0x672f, 0x5b84, 0x3d96, 0x4a24, 0x8c86, 0x4f2a, 0xd7af, 0xdf11, 0xe9f7, 0x68e6, 0x6d24,
    0xfac1, 0x6d76, 0xa893, 0x1f65, 0x9ab7, 0x189a, 0x1279, 0x5bd4, 0x6dc6, 0x1823, 0xabc0, 0x7f2b, 0xd763, 0x13dd, 0xee7b, 0x935b,
    0x6d25, 0xfbc0, 0x7d7c, 0xa222, 0x049a, 0xdeb6, 0x5f5b, 0xa665, 0x07f1, 0x86c0, 0xa322, 0x1591, 0xc40d, 0x4e15, 0xf99b, 0x0431,
    0x751d, 0x4b1b, 0xa2b2, 0x940a, 0x4b45, 0xfcec, 0x2661, 0x062d, 0x4b17, 0xaebe, 0x5472, 0x3409, 0x4ce8, 0x2670, 0x173c, 0x4bb6,
    0x0f1f, 0xe076, 0x7034, 0x3715, 0x63e9, 0xd96e, 0xf0b2, 0xb44b, 0x0b72, 0xc937, 0xa950, 0xcdad, 0x77e6, 0x92f6, 0xd183, 0x9507,
    0x5743, 0x3625, 0x42d2, 0xf228, 0x0cc7, 0x0bb3, 0x08f6, 0x7eae, 0x43ed, 0xdc1c, 0xd7e7, 0x9759, 0x2b0b, 0xb138, 0x2d26, 0xfa2f,
    0x8398, 0xae5d, 0xb791, 0xe2b5, 0x91e1, 0xf589, 0xda57, 0xfa96, 0x3a21, 0x8aa2, 0x0d34, 0xe94b, 0xd45a, 0x19f9, 0x6011, 0x128b,
    0xa926, 0xbbdb, 0x648b, 0xcc3d, 0xf67d, 0x1dbe, 0x637a, 0x4afd, 0x555f, 0x082f, 0xa777, 0x04e8, 0xacc4, 0x0c1e, 0xd26a, 0x4ff3,
    0x0e76, 0x9814, 0x992f, 0xb31f, 0x2817, 0x9e39, 0xd238, 0x1da1, 0x7c65, 0xaa30, 0x9ed0, 0x3bd1, 0x6b59, 0xe186, 0x91cf, 0xdba7,
    0x1b6d, 0xd693, 0xf226, 0x02c9, 0xebdf, 0x62d8, 0xf954, 0xcbfe, 0x428f, 0xaf75, 0x8eb2, 0x5908, 0x930c, 0x3a72, 0xd9f1, 0x6f2d,
    0xd1de, 0xc85a, 0xd536, 0x649e, 0xd928, 0xb6f4, 0x96db, 0xb882, 0x0ecf, 0x21ad, 0xbdd0, 0x09ba, 0x23e9, 0xdb82, 0x3e48, 0xa7e7,
    0x9478, 0x3937, 0xafa9, 0x526e, 0x4e2f, 0xc3a1, 0x9588, 0xd8cc, 0x431b, 0x2aea, 0x41d2, 0xc135, 0x230a, 0x3861, 0xe8f4, 0x7aee,
    0x4781, 0xf45c, 0x1e89, 0x6750, 0x24fb, 0xbea1, 0x4bd6, 0x6f7f, 0x838c, 0xba49, 0xe712, 0x6361, 0x51e6, 0xf5ba, 0xe964, 0xfb75,
    0xc8c9, 0x46a5, 0xc173, 0x654c, 0x1af1, 0x5b04, 0xbd16, 0xcf7c, 0x8421, 0x60d5, 0xd64f, 0x2efa, 0x15ee, 0xbb72, 0xcd22, 0xf869,
    0xe7c8, 0xb9bb, 0x26fd, 0x9ab1, 0x1e9c, 0x7245, 0x6472, 0x35c4, 0x902e, 0x2b4d, 0xf77e, 0x0fb6, 0x49df, 0x4460, 0x26a0, 0xc7ec,
    0x9ce9, 0x20fe, 0xff88, 0x7118, 0x0a32, 0x987c, 0xf147, 0x50b5, 0xb7e2, 0x91c6, 0xd2ae, 0x8b37, 0x89aa, 0x3621, 0x46d6, 0xb200,
    0x2603, 0x644f, 0x08f9, 0x71a1, 0xb38b, 0xbc83, 0x4be2, 0x5b4b, 0xf259, 0x7db6, 0x68e8, 0x632a, 0x1aad, 0x0758, 0x2f69, 0x9776,
    0x0424, 0x6008, 0x0b92, 0x29d7, 0x4ff2, 0x0f77, 0x881e, 0x939e, 0xa8e0, 0x6c16, 0xd9f8, 0x6624, 0x4184, 0x9763, 0x1131, 0x2081,
    0x80f7, 0xf22f, 0x0bc0, 0x7b85, 0x3de1, 0x3d53, 0x8fe1, 0x1b50, 0xebae, 0x13a9, 0x9a0f, 0xa022, 0x268c, 0xebc0, 0x7dc7, 0x1999,
    0x0071, 0x7171, 0x635b, 0x6bdc, 0x6403, 0x44b5, 0xf375, 0x4091, 0x937d, 0x4b03, 0xbaaa, 0x04f1, 0xb5dd, 0x8cef, 0x2643, 0x240f,
    0x4a55, 0xfdf7, 0x2c71, 0xbc73, 0xbb12, 0xad42, 0x9b93, 0x2db5, 0x69bc, 0x2675, 0x1239, 0x1b94, 0x2f6a, 0x9475, 0x343a, 0x7fdb,
    0x2793, 0xe5d4, 0x87b1, 0xc358, 0x6c71, 0xbe9f, 0x75e8, 0xbeee, 0x0499, 0xddb5, 0x6f45, 0xb9b6, 0x2bf0, 0x4ac3, 0x6b61, 0xd9be,
    0x2062, 0x6314, 0x2493, 0xd6c9, 0xa87c, 0xf08a, 0x8c73, 0xbadf, 0x7184, 0x96ae, 0xcdf7, 0x2dbc, 0x60b5, 0xb62f, 0x4d00, 0xdf93,
    0x6b75, 0xcdaa, 0x70e1, 0xe2c0, 0xe494, 0xd6fa, 0x9b4f, 0xf169, 0x7e9b, 0x76d8, 0xbdc3, 0x1aa9, 0x035c, 0x6f41, 0xbdb2, 0x6bd8,
    0x6007, 0x049d, 0xd9b1, 0x2f6d, 0x9372, 0x440c, 0x4acc, 0x646e, 0x29d8, 0x40fd, 0xff11, 0xe881, 0x0f9b, 0x64f2, 0xb544, 0x1576,
    0x23ea, 0xd881, 0x0e56, 0xb834, 0xb879, 0xf534, 0x67ea, 0x9e41, 0xaa40, 0xeea0, 0x4880, 0x0a34, 0x9e7a, 0x917b, 0x6f13, 0xefe0,
    0x19cb, 0x5223, 0x0362, 0x517f, 0x6c23, 0xeccd, 0x07fb, 0x8cca, 0x0366, 0x557b, 0x2c0b, 0xc609, 0x6807, 0x8cc5, 0x0c69, 0xa51d,
    0x4c94, 0x5a0c, 0xa415, 0x5597, 0xc0e7, 0xe0d3, 0xd591, 0xc339, 0x0d10, 0xcd6f, 0xb524, 0x7516, 0x4010, 0x12fc, 0xde51, 0xb8bc,
    0x30f1, 0xf03c, 0x3ac5, 0x6e46, 0xabbe, 0x0155, 0x445e, 0x189e, 0x167d, 0x1bfc, 0x4702, 0x77df, 0xabcf, 0x7024, 0x2705, 0x7342,
    0x727e, 0x5f49, 0xb477, 0x374e, 0x38b2, 0x3b27, 0x9daf, 0x77b3, 0xc7a3, 0xd3a6, 0x9234, 0x1341, 0x72e7, 0xc6d0, 0xb1de, 0xcbc0,
    0x7cb1, 0x7ee4, 0x09a7, 0x3ef4, 0x1b5b, 0xe0a5, 0xa3e7, 0xd054, 0x53db, 0xea91, 0x3d9d, 0x412f, 0x3cc8, 0x0571, 0x2456, 0x130c,
    0x3faa, 0x540e, 0x4875, 0xffc1, 0x3851, 0xd8c4, 0x4b13, 0xaaba, 0x145a, 0x1ecd, 0x2314, 0x267f, 0x1833, 0xbbd0, 0x6f80, 0x7c73,
    0xbc26, 0xee47, 0xaf67, 0x9ca0, 0x69b7, 0x2d7e, 0xa277, 0x51cf, 0xdc93, 0x5868, 0xe267, 0x4333, 0x02c2, 0xe0d4, 0xd296, 0xb30f,
    0x3807, 0x8e92, 0x7928, 0xb25a, 0x7c59, 0x960c, 0x6f55, 0xa9a6, 0x3b5b, 0xe1d3, 0xc49a, 0xd982, 0x1c5e, 0x9291, 0xb6e4, 0x86cb,
    0xa829, 0xa5df, 0x8e56, 0xbdec, 0x3586, 0xd26c, 0x49f5, 0x6e4a, 0xa7b2, 0xc12d, 0x3b12, 0xa89a, 0x166c, 0x0aed, 0x47a3, 0xd67e,
    0x1fcb, 0x3419, 0x5cf8, 0x36db, 0xbc2c, 0xe44d, 0x0f23, 0xdc4a, 0x81b1, 0xa562, 0x33eb, 0xd93b, 0xa5e7, 0xb66e, 0x0c41, 0x8d35,
    0xed92, 0x49af, 0x3410, 0x55f1, 0xa681, 0xe315, 0x204a, 0x4b3c, 0x8595, 0xc56a, 0x3879, 0xf0ec, 0xea15, 0xb919, 0x845f, 0x1eab,
    0x4572, 0x25b9, 0xede8, 0x33d5, 0xe705, 0x7476, 0x317b, 0x6bbd, 0x0562, 0x3745, 0x33b9, 0x8b69, 0xd7f4, 0x844a, 0x0bbe, 0x05fb,
    0xaedc, 0x3610, 0x77e7, 0x93f7, 0xc189, 0x9fb6, 0x4cbc, 0x7224, 0x0513, 0x4634, 0x50e2, 0xe0b5, 0xb3f7, 0xc0ff, 0xf8cb, 0x456a,
    0x3da1, 0x7d13, 0xcd4d, 0x9706, 0x7454, 0x1359, 0x6aff, 0x562b, 0x4f46, 0xbbc3, 0x7c93, 0x5cc6, 0x08e5, 0x6dbd, 0x6358, 0x68df,
    0x541d, 0x5b66, 0xdf74, 0x8c92, 0x5b3e, 0x872c, 0x5ec5, 0x29f0, 0x68d5, 0x5e17, 0xfb22, 0x9f9e, 0x6494, 0xd322, 0x16b0, 0xd631,
    0x5084, 0x86d3, 0xb031, 0x3524, 0x70ce, 0xcdef, 0x35a4, 0xf04e, 0x48b7, 0x3d03, 0xdfb1, 0x4957, 0xcce8, 0x23a8, 0x9ac3, 0x6cee,
    0x2100, 0x107d, 0x7dc6, 0x1898, 0x107b, 0x7bc0, 0x78a4, 0x2fdd, 0x23c2, 0xf0a9, 0xaf50, 0xab97, 0x287c, 0xf552, 0x018c, 0x9d87,
    0x5f9b, 0x66a5, 0xc005, 0x0231, 0x1327, 0x1481, 0xc516, 0x4405, 0x43c5, 0xf434, 0x76e1, 0x84fa, 0xbb0e, 0xb15e, 0x4b40, 0xf9e9,
    0x7643, 0x2658, 0x3f14, 0xeab0, 0x1cbc, 0x7073, 0x7052, 0x5173, 0x602f, 0x2cb5, 0x78b7, 0x3cce, 0x0377, 0x446a, 0x2caa, 0x67a8,
    0xdc03, 0xc8f8, 0x7794, 0xe084, 0x82c6, 0xe108, 0x1f41, 0xbe93, 0x79e4, 0x7e96, 0x7bd5, 0x6db1, 0x6f54, 0xa8a7, 0x2b51, 0xeb62,
    0xdf65, 0x9d83, 0x5b9f, 0x268d, 0xeac1, 0x6dcd, 0x1328, 0x1b8e, 0x3570, 0x249a, 0xdfc0, 0x3826, 0xafb3, 0x4874, 0xfec0, 0x285b,
    0xd275, 0x50ec, 0xeebb, 0x539b, 0xaad1, 0x7f31, 0xcd79, 0xa332, 0x0581, 0xd4a6, 0xe505, 0x5660, 0x040d, 0x4921, 0xba9e, 0x30c5,
    0xc408, 0x4b10, 0xa9b9, 0x2444, 0x011e, 0x0f15, 0xea7c, 0xd070, 0x77ff, 0x8bef, 0x5172, 0x612e, 0x3cbf, 0x7206, 0x2731, 0x4776,
    0x03ab, 0x98b6, 0x3b8d, 0x3705, 0x73f9, 0xc9c5, 0x5ba2, 0x1bb0, 0x0b4e, 0xf50b, 0x58d5, 0x5fda, 0x27e4, 0x92a3, 0x84d6, 0x9722,
    0x5070, 0x7227, 0x0610, 0x762a, 0x4f31, 0xccb4, 0x7ff4, 0x08bc, 0x34e4, 0xa105, 0x10a0, 0xa01b, 0x1fb5, 0x4a67, 0xcfc5, 0x3d98,
    0x442a, 0x6cea, 0x2504, 0x5055, 0x5702, 0x7764, 0x1074, 0x74cf, 0x88c2, 0x4f42, 0xbfc7, 0x3cbb, 0x7602, 0x6719, 0x6db2, 0x6c57,
    0x98b9, 0x3482, 0xc763, 0x1366, 0x55c0, 0x97b0, 0xc2e2, 0xc7c0, 0xb0c5, 0xc1d0, 0xc6ef, 0x8ee1, 0x0a5b, 0xf115, 0x02e7, 0xc5f1,
    0xa3e2, 0xd551, 0x03f9, 0xcae4, 0x499e, 0x0521, 0x7406, 0x410b, 0x18ec, 0x640f, 0x48b9, 0x330d, 0x3fdd, 0x2379, 0x4b12, 0xabbb,
    0x0450, 0x147c, 0x38eb, 0x627e, 0x5ff2, 0x0fcc, 0x33a5, 0x9775, 0x0727, 0x5016, 0x1441, 0x05d6, 0x83f1, 0xc734, 0x4431, 0x77f1,
    0x85e1, 0xb11e, 0x0b00, 0xbb45, 0xfa15, 0xb9a2, 0x3fe4, 0x1a40, 0xeab5, 0x19b9, 0x2051, 0x5027, 0x2570, 0x2421, 0x647b, 0x3ccd,
    0x0074, 0x7474, 0x3379, 0x4ba9, 0x1000, 0x00bb, 0xbbbb, 0x04eb, 0xafc7, 0x3c00, 0xcdb9, 0x63f2, 0xc275, 0x5057, 0x5500, 0x5770,
    0x0516, 0x4331, 0x00c0, 0xc0c0, 0xc7f4, 0x84f1, 0xb005, 0x0110, 0x011b, 0x0a10, 0xba5e, 0xf005, 0x03fc, 0xcfe1, 0x19bc, 0x2554,
    0x0005, 0x0505, 0x5022, 0x2075, 0x7403, 0x440e, 0x48ce, 0x447a, 0x3cba, 0x7703, 0x7713, 0x6703, 0x77a8, 0xdcb8, 0x7343, 0x737f,
    0x4f43, 0xbec6, 0x2cb1, 0x7cb3, 0x7ce6, 0x29b3, 0x2b96, 0x2ca5, 0x68a7, 0x2c65, 0xa867, 0xeb91, 0x2c96, 0x5b94, 0x2d86, 0x5a8f,
    0x2796, 0xe0d1, 0xd793, 0xe32d, 0x1872, 0xfa91, 0x3d26, 0xfa94, 0x3823, 0xaab6, 0x1856, 0xdeb5, 0x5c58, 0x967b, 0x1822, 0xaac1,
    0x6f21, 0xddd2, 0x0822, 0xaa7a, 0xd49a, 0xd939, 0xa7e5, 0x967a, 0x1923, 0xbacb, 0x6590, 0xc62d, 0x4c23, 0xedbb, 0x6086, 0x851c,
    0x4ce3, 0x2d7b, 0xa772, 0x01ed, 0xfce6, 0x2c6b, 0xa669, 0x0bfd, 0x46b8, 0xdc6e, 0xa595, 0xc41c, 0x5f04, 0xf93a, 0xa590, 0xc119,
    0x0f26, 0xd94f, 0xd193, 0x8517, 0x47e8, 0x9d35, 0xed29, 0xf214, 0x30fb, 0xfa36, 0x9a81, 0x2eac, 0x43b8, 0x8949, 0xd5c2, 0x906a,
    0x6f09, 0xf5fa, 0xa924, 0xb9d9, 0x449f, 0xd95f, 0xc183, 0x95bc, 0xecf8, 0x32ce, 0xed15, 0xce28, 0xc17e, 0x6841, 0xca83, 0x2ef9,
    0x16ed, 0x8b6c, 0xd2f1, 0xd468, 0x2bcb, 0x71f8, 0xead2, 0x7ede, 0x339d, 0xaf4d, 0xb68a, 0xe8a5, 0x2bbf, 0x058c, 0xd9ab, 0x3577,
    0x239d, 0xaff6, 0x0d31, 0xec4e, 0x8478, 0x398c, 0x1412, 0x5685, 0xe1e8, 0xffa1, 0x5831, 0xbb3e, 0x816e, 0x7abd, 0x14d2, 0x9645,
    0x261c, 0x7b50, 0xe834, 0xba2e, 0x8075, 0x70ad, 0xae8c, 0x6640, 0x25e0, 0xb4b1, 0xf188, 0x9f7a, 0x8070, 0x75a8, 0xfeae, 0x4635,
    0x51e3, 0xf0bf, 0xb946, 0xdb00, 0xbcca, 0x02ab, 0x89bd, 0x2136, 0x264b, 0x2c07, 0xca05, 0xa87f, 0xf389, 0xbc6d, 0xa50c, 0x5d85,
    0x5aad, 0x05b4, 0xe193, 0x84da, 0x9b2e, 0x9008, 0x0d6b, 0xb614, 0x763b, 0x5e20, 0xcc15, 0xde55, 0xbcb8, 0x70d9, 0xdaf8, 0x5539,
    0x6e49, 0xa4b1, 0xf133, 0x24c1, 0x849b, 0xda6f, 0xc2ae, 0x8b8c, 0x3211, 0x32ca, 0xe911, 0x8e00, 0xebba, 0x07bd, 0xca8c, 0x21f6,
    0xe68b, 0xebf3, 0x4ef4, 0x187a, 0xf299, 0xbd76, 0xaf1c, 0xe7db, 0xaaa8, 0x0648, 0x2e72, 0x9d66, 0xbe7a, 0x900d, 0x086e, 0xe636,
    0x564e, 0x2a23, 0x881b, 0x969b, 0xf8c2, 0x4c63, 0xadfb, 0x222a, 0x094a, 0xd319, 0x2d8b, 0x5782, 0xf7e4, 0x952c, 0x7c68, 0xa73d,
    0x4ea2, 0x4e2c, 0xc0a2, 0xa596, 0xc71f, 0x6f1a, 0xe6e9, 0x8991, 0x0d1a, 0xc765, 0x1560, 0x35fc, 0xa816, 0x9ae0, 0x4fcd, 0x3048,
    0x4985, 0x1e3a, 0xd4e3, 0xa040, 0x44ee, 0xa82e, 0xa2d8, 0xfe60, 0x88fb, 0x767b, 0x1e60, 0x8eb9, 0x5203, 0x2342, 0x7029, 0x2a08,
    0xa330, 0x0783, 0xf4b2, 0xf067, 0x619e, 0x8c0f, 0xc6a3, 0xc2ad, 0x888f, 0x020f, 0x2d19, 0xc510, 0x4203, 0x23f9, 0xcb92, 0x2ee3,
    0x0cf7, 0x3b83, 0x390b, 0x9395, 0xa3eb, 0xdc58, 0x93a3, 0x95dd, 0x8d99, 0x413e, 0x2dd9, 0x05d0, 0x85f7, 0xa708, 0x7b97, 0x2ff3,
    0x0dec, 0x3193, 0x8355, 0x6390, 0xa017, 0x13b9, 0x8a1f, 0xb089, 0x8d9c, 0x443b, 0x7dfb, 0x25a5, 0xf1f4, 0xe306, 0x3359, 0x6b89,
    0x3156, 0x4690, 0xf446, 0x0493, 0xd7bf, 0xcf01, 0xf95c, 0xc3f6, 0xc2df, 0xfafd, 0x514a, 0x5916, 0x8d12, 0xcab5, 0x18cf, 0x472c,
    0x59f1, 0x6af5, 0x5c21, 0xef02, 0xfb29, 0x9495, 0xd4da, 0x9979, 0xe549, 0x1a2c, 0x86d9, 0xba3b, 0x9560, 0x3024, 0x25e9, 0xbdb8,
    0x61d2, 0xc043, 0x4477, 0x31b7, 0xa771, 0x02ee, 0xccf8, 0x33b8, 0x8a68, 0xc7fe, 0x8efb, 0x1041, 0x41fa, 0xe91d, 0x820c, 0x2bc2,
    0x78f1, 0x7a88, 0x21e7, 0xf79a, 0xeb52, 0xef55, 0xac7e, 0xb6a4, 0xc68b, 0xea85, 0x2989, 0x11ac, 0xbd1c, 0xc576, 0x2465, 0x203f,
    0x3e49, 0xa6e6, 0x8472, 0x3386, 0xb456, 0x166f, 0x09ee, 0x77bd, 0xc9ad, 0x33ca, 0xf81a, 0x94bb, 0xfaf4, 0x5843, 0xc94c, 0xd22b,
    0x0eb2, 0x5cd0, 0x1ef3, 0x1d2a, 0xf7ee, 0x9f26, 0xdc2c, 0xe7d7, 0xa6a4, 0xc630, 0x513e, 0x2d62, 0xbe6b, 0x811c, 0x08cf, 0x4797,
    0xe24a, 0x6e1e, 0xf3e6, 0xd302, 0x3690, 0xf767, 0x16af, 0xc92e, 0xb049, 0x4d5c, 0x83cf, 0xf90a, 0x95a0, 0xf0e4, 0xe21d, 0x3949,
    0xd1d7, 0xc153, 0x456c, 0x3ba7, 0x1d2f, 0xf2eb, 0xcf04, 0xfc59, 0x93d4, 0xe2aa, 0x8efe, 0x1544, 0x11d8, 0xc968, 0xf60f, 0x6fcc,
    0x303f, 0x3ef2, 0x1d5d, 0x8099, 0x9c41, 0x8856, 0xdbd6, 0x6a1c, 0xb5c8, 0x99fa, 0x66ca, 0xaf6a, 0x91ad, 0xb9c5, 0x5883, 0x098c,
    0x15df, 0x8a43, 0xecd5, 0x1fe3, 0x1c31, 0xfdfe, 0x2578, 0x2c29, 0xe42b, 0x6945, 0xdf8c, 0x746a, 0x2d67, 0xbb6e, 0xd13e, 0x28ba,
    0x3394, 0xa644, 0x26d0, 0xb79c, 0xefb8, 0x4193, 0x8074, 0x71ac, 0xbe86, 0x6cf1, 0x3e1f, 0xf0b0, 0xb649, 0x2b66, 0xdc55, 0x9eae,
    0x45af, 0xf864, 0xeac5, 0x69c9, 0x5300, 0x314a, 0x5a8c, 0x2495, 0xd0cf, 0xc840, 0xcf2c, 0xd471, 0x32d2, 0xf109, 0x1efb, 0x1522,
    0x77be, 0xcaae, 0x03d4, 0xe7c9, 0xb8ba, 0x36f7, 0x9000, 0x0563, 0x3644, 0x23b3, 0x81d8, 0xcc0b, 0xc04b, 0x4c7f, 0xb1e7, 0xf2f9,
    0xdd16, 0xcce6, 0x2da6, 0x7aaf, 0x06c0, 0xa6fa, 0x986e, 0xe355, 0x600a, 0x0990, 0x09c3, 0x5a90, 0x3889, 0x001c, 0x1c1c, 0xd0d3,
    0xd45c, 0x1fff, 0x002d, 0x2d2d, 0xf124, 0x33d6, 0xe406, 0x4468, 0x2ea8, 0x47bc, 0xc961, 0xff06, 0xff96, 0x6f06, 0xfaf5, 0x5942,
    0xd946, 0xd89a, 0x154d, 0x18d1, 0x5932, 0xa936, 0xabcb, 0x7420, 0x672d, 0x5986, 0x1d82, 0x5f46, 0xbb78, 0xc728, 0x582d, 0xa722,
    0x51bd, 0xaee1, 0x0b2d, 0x9668, 0x0b31, 0x8a74, 0xdbe2, 0x5e28, 0xc41d, 0x5e05, 0xe930, 0xaf21, 0xdae6, 0x4b27, 0x9e8e, 0x658f,
    0xd932, 0xacee, 0x2634, 0x5378, 0x4932, 0xa98d, 0x1070, 0x70cb, 0xc8ea, 0x6586, 0xd03b, 0x3cb4, 0x790d, 0x977f, 0x0d2d, 0xf052,
    0x54ab, 0xedd0, 0x0bed, 0x56a8, 0xccc5, 0x0e85, 0x6be7, 0x5f38, 0xc506, 0x5415, 0x536e, 0x5f24, 0xd91a, 0x84c6, 0x8732, 0x40db,
    0xd937, 0xa9eb, 0x7616, 0x730d, 0x3d31, 0xed83, 0x58be, 0x34b1, 0xf450, 0x1285, 0xa728, 0x5bb7, 0x0ea5, 0x4bc7, 0x7e6e, 0x832d,
    0x1be8, 0x5316, 0x275c, 0x2a1b, 0xb023, 0x2736, 0x4071, 0x739d, 0xada1, 0x7870, 0xfb09, 0xb4b5, 0xf58c, 0xdf52, 0xaab4, 0x1a54,
    0xfea1, 0x493a, 0xa185, 0x9020, 0x2543, 0x1712, 0x6598, 0xce25, 0xcc73, 0xb833, 0xbf7e, 0x8502, 0x52fd, 0xddbc, 0x664c, 0x29ec,
    0x74c9, 0x8ec4, 0x2f7e, 0x8061, 0x64b9, 0xfe0f, 0xe794, 0xe5e7, 0xb482, 0xc2bb, 0x9e99, 0x7298, 0xb9af, 0x32e9, 0xca32, 0x9f48,
    0xb242, 0x6441, 0x06f7, 0x91cd, 0xd9a5, 0x3b79, 0xc3f1, 0xc5d8, 0x8acb, 0x645d, 0x1aeb, 0x411e, 0x0df9, 0x2486, 0xc3dc, 0xe8f5,
    0x7bef, 0x578b, 0xfeed, 0x0576, 0x2351, 0x633a, 0x0abd, 0x17f3, 0x8479, 0x388d, 0x0418, 0x5c34, 0xfa17, 0xbba0, 0x1ff0, 0x0f22,
    0xdd4b, 0x91bb, 0xafd3, 0x2814, 0x9d3a, 0xe226, 0x0272, 0x5064, 0x6633, 0x5693, 0xf7fe, 0x8f36, 0xcc87, 0x4cc7, 0x095f, 0xc60c,
    0x6d02, 0xdce7, 0x2c1c, 0xd11e, 0x089a, 0x12c2, 0xe06f, 0x692d, 0xb7e4, 0x97c0, 0xb292, 0xb491, 0xd1a8, 0xbe2c, 0xc65b, 0x3a55,
    0xfed6, 0x3e4d, 0xa2e2, 0xc45a, 0x1942, 0xdbaa, 0x1660, 0x06e1, 0x87db, 0xa932, 0xafcf, 0x3408, 0x4de9, 0x367a, 0x1d8d, 0x5049,
    0x4b1e, 0xa7b7, 0xc428, 0x6b30, 0x88ef, 0x626f, 0x4ee3, 0x0f6d, 0x9204, 0x2371, 0x431a, 0x2beb, 0x51d8, 0xcb84, 0x38f5, 0x7c60,
    0xaf35, 0xcef2, 0x1ba4, 0x1f5a, 0xa588, 0xd901, 0x9fdd, 0x27d7, 0xa190, 0x8535, 0x65ca, 0x9c77, 0xbe60, 0x8a17, 0xb881, 0x0dcc,
    0x11b3, 0xa203, 0x25bb, 0xefea, 0x13c1, 0xf267, 0x4388, 0xb979, 0xe43f, 0x7d51, 0x8f0f, 0xf5be, 0xed60, 0xbb5d, 0xe20d, 0x2959,
    0xc17c, 0x6a43, 0xea97, 0x3b9b, 0x2113, 0x036e, 0x5d73, 0xac5b, 0x9381, 0xb7ff, 0x8cdb, 0x1277, 0x55da, 0x8daa, 0x720d, 0x2c3a,
    0xf738, 0x49f0, 0x6b4f, 0xf790, 0xe158, 0x4f11, 0xec94, 0x5ea2, 0x4e97, 0x7b19, 0xa17d, 0x68d8, 0x531a, 0x2b50, 0xea63, 0xcf6f,
    0x9732, 0x4060, 0x628c, 0xad00, 0xd9d1, 0x4f0d, 0xf088, 0x8e71, 0x9acb, 0x64e6, 0xa150, 0x45f5, 0xa23e, 0x1886, 0x0e65, 0x8b07,
    0xb99a, 0x07dc, 0xabed, 0x5206, 0x2647, 0x200b, 0x0a7d, 0xd733, 0x438d, 0xbc7c, 0xb41d, 0x5d24, 0xfb0c, 0xb1b0, 0xa5ae, 0xff27,
    0xdeb7, 0x5e5a, 0xb66f, 0x0d40, 0x9d3f, 0xe723, 0x5250, 0x7011, 0x1230, 0x129d, 0xbf30, 0xcb4c, 0xf03d, 0x3bc4, 0x7e4c, 0xa10f,
    0x1aaa, 0x005f, 0x5f5f, 0xa261, 0x47d9, 0xac04, 0xccde, 0x159e, 0xcb02, 0xbe73, 0x9904, 0x9834, 0xb90f, 0x9249, 0x6e3c, 0xd1c4,
    0xd240, 0x65d9, 0x8f64, 0x9ed5, 0x3ed4, 0x3b7b, 0xc1f3, 0xe5cc, 0x9fa9, 0x53a3, 0x92e9, 0xce9c, 0x75ca, 0x9ccc, 0x05db, 0x8efc,
    0x1746, 0x31cc, 0xdc0a, 0xc1f1, 0xe7ce, 0xbfbd, 0x46c1, 0xa517, 0x469e, 0xfa48, 0xe4ff, 0xbd91, 0x48fb, 0x714f, 0x5d65, 0xba4d,
    0xe316, 0x2349, 0x7b22, 0x9a46, 0xe96b, 0xf47a, 0x38af, 0x263a, 0x5d76, 0xa95e, 0xc3a3, 0x978a, 0xf8d8, 0x5679, 0x1d14, 0xc9d0,
    0x4eb7, 0x5b39, 0x802b, 0x2ef3, 0x1ce7, 0x2b28, 0x921b, 0x3c6e, 0xa3d7, 0xe064, 0x6226, 0x07aa, 0xdd9b, 0x416b, 0x788c, 0x07f5,
    0x82c4, 0xe30a, 0x3f55, 0xabf1, 0x4e1a, 0xf694, 0xf457, 0x1582, 0xd71e, 0x6ea0, 0x4d58, 0x87cb, 0xb922, 0xbf64, 0x9f18, 0xe212,
    0x3646, 0x21b1, 0xa1cc, 0xd969, 0xf7b5, 0xc47d, 0x3e65, 0x8aca, 0x655c, 0x0ae1, 0x4baf, 0x1606, 0x6087, 0x841d, 0x5ce9, 0x27ca,
    0xbc8d, 0x45ec, 0xbb27, 0x9877, 0xfa4c, 0xe0fb, 0xfdb9, 0x623f, 0x1eb3, 0x5d6a, 0xb542, 0x1370, 0x43d6, 0xe727, 0x5654, 0x3039,
    0x38f4, 0x7d61, 0xbf3f, 0xc443, 0x005b, 0x5b5b, 0xe249, 0x6d1d, 0xc3f8, 0xccd1, 0x1a91, 0x3b64, 0xdeec, 0x0501, 0x5426, 0x605d,
    0x5ec7, 0x2bf2, 0x48c1, 0x4b75, 0xccdc, 0x179c, 0xeb16, 0xab11, 0xaefa, 0x1036, 0x368d, 0xea7a, 0xd676, 0x17c3, 0xb449, 0x0970,
    0xe923, 0xbc32, 0xfa53, 0xffe4, 0x1d74, 0xa9b0, 0x2d4d, 0x9144, 0x502c, 0x2e7b, 0x946f, 0x2e20, 0xcf34, 0xcc69, 0xa229, 0x0f91,
    0x6ef8, 0x1500, 0x559c, 0xcbec, 0x509d, 0x9fca, 0x30c0, 0xc10d, 0x1b32, 0x89cc, 0x5047, 0x4510, 0x47db, 0xae06, 0xecca, 0x00fc,
    0xfcfc, 0x3671, 0x1686, 0xe007, 0x0145, 0x544e, 0x0835, 0xbd6d, 0xb407, 0x473e, 0x4be3, 0x5a4a, 0xe253, 0x7707, 0x7317, 0x272b,
    0x5d6c, 0xb344, 0x734c, 0x7c70, 0xbf25, 0xde59, 0xb0b4, 0xb0a1, 0xa5b4, 0xe53d, 0x6e58, 0xb5a0, 0xf192, 0x8560, 0x309f, 0x9e52,
    0xb953, 0xce15, 0xfc43, 0x89ce, 0x5245, 0x6504, 0x52b9, 0x99f8, 0x64c8, 0x8f7e, 0x84cf, 0x8e3b, 0xd081, 0x860e, 0x6dec, 0x3209,
    0x2ad2, 0x79ea, 0x7098, 0x9bb9, 0x079f, 0xe8ae, 0x20b4, 0xb5c2, 0x93f0, 0xc68e, 0xef80, 0x79ab, 0x31d9, 0xc91f, 0x8178, 0x6cab,
    0x6445, 0x02f3, 0xd1e5, 0xf361, 0x5485, 0xc3fe, 0xcad7, 0x7aad, 0x04c2, 0x86ee, 0x8d0c, 0xd4ab, 0xe808, 0x8612, 0x71f0, 0xe2da,
    0xfe8e, 0x6615, 0x70b5, 0xb694, 0xf6bb, 0xdb78, 0xc4b2, 0xf1aa, 0xbd58, 0x8132, 0x26e1, 0x86ad, 0xce4f, 0xa619, 0x7b8d, 0x35e9,
    0xbd03, 0xda69, 0xc4a8, 0xebb0, 0x0db7, 0x6ac8, 0x611c, 0x0e8d, 0x63ef, 0xdf68, 0x908e, 0x8bed, 0x5370, 0x413a, 0x29dd, 0x45f8,
    0xaf33, 0xc8f4, 0x7b98, 0x20fc, 0xfd8a, 0x510c, 0x1f50, 0xaf82, 0x7945, 0xdf37, 0xcfd1, 0x298c, 0x14a9, 0xed3e, 0xe503, 0x5066,
    0x6431, 0x7687, 0xe29c, 0xb8c8, 0x4485, 0xc345, 0x716c, 0x7e46, 0xab05, 0xbaee, 0x40b5, 0xb759, 0x2a7d, 0xd645, 0x24f0, 0xb5aa,
    0xfb98, 0x2524, 0x7075, 0x7654, 0x314f, 0x5f89, 0x74b7, 0xf0ba, 0xbc43, 0x8b22, 0x9cbf, 0x76a8, 0xcdb3, 0x69f8, 0x6231, 0x10bd,
    0xbd06, 0xdf6c, 0x948a, 0xcbc5, 0x79b4, 0x2ec6, 0x29d2, 0x4af7, 0x5f55, 0xa86b, 0xe79d, 0xecee, 0x24d8, 0x9d82, 0x5a9e, 0x3687,
    0xe070, 0x7632, 0x5729, 0x5c4f, 0x816c, 0x78bf, 0x34c6, 0x8327, 0x11e2, 0xf352, 0x67b6, 0xc21d, 0x383f, 0xb6aa, 0xc885, 0x0ae9,
    0x43a7, 0x9656, 0x350f, 0x5be5, 0x5cf7, 0x39d4, 0x4c4a, 0x84d2, 0x9326, 0x1058, 0x58e3, 0x69ec, 0x7625, 0x403e, 0x3cd2, 0x1f6b,
    0x94b9, 0xf8f6, 0x7857, 0xdc2e, 0xe5d5, 0x86b0, 0xd352, 0x66c0, 0xa560, 0x31e9, 0xf92f, 0xb085, 0x8190, 0x8443, 0x02b7, 0x95a1,
    0xf1e5, 0xf217, 0x33f8, 0xca28, 0x8552, 0x02ad, 0x8fbb, 0x410a, 0x19ed, 0x7405, 0x4208, 0x28f2, 0x7bdc, 0x64b8, 0xff0e, 0xf79e,
    0xef56, 0xaf7d, 0x86ba, 0xd958, 0xc684, 0xe58a, 0xd9ef, 0x7133, 0x2119, 0x0964, 0xfd37, 0xecb1, 0x7b87, 0x3fe3, 0x1d47, 0x9a83,
    0x2cae, 0x63ac, 0x9c2b, 0xe23c, 0x1868, 0xe08b, 0x8dc9, 0x116e, 0x7fde, 0x2296, 0xb5f6, 0xa7c4, 0xb75b, 0x287f, 0xf651, 0x3192,
    0x8254, 0x739a, 0xaaa6, 0x0846, 0xce1e, 0xf748, 0x3980, 0x181e, 0x96fd, 0x9ea4, 0x4fa5, 0x5820, 0xaa2f, 0x81cf, 0xdb1c, 0xa0d6,
    0xd278, 0x5de1, 0x3ec9, 0x2666, 0x012a, 0x3b21, 0x9ba9, 0x178f, 0xf805, 0x8ba4, 0x1a39, 0x93cc, 0xfab2, 0x1e05, 0xebdc, 0x61db,
    0xc94a, 0xd42d, 0x6e8e, 0x6376, 0x46f1, 0x9527, 0x7763, 0x1773, 0x04f9, 0xbdd5, 0x0cbf, 0x73cb, 0xfbf7, 0x4a4b, 0xe3e9, 0xdcb6,
    0x7d4d, 0x9313, 0x256d, 0x393c, 0xa4a2, 0xe220, 0x0474, 0x3058, 0x5995, 0x0e91, 0x7ff3, 0x0fbb, 0x44d2, 0x9412, 0x535d, 0x6c17,
    0xd8f9, 0x762e, 0x4b35, 0x8c9c, 0x5530, 0x6740, 0x34eb, 0xae0a, 0xe0c6, 0xc084, 0x83b0, 0x8675, 0x1697, 0xf116, 0x01e4, 0xf5ef,
    0xbc31, 0xf950, 0xcffa, 0x02a7, 0x85b1, 0xe14e, 0x5907, 0x9c03, 0xca14, 0xb96e, 0xf328, 0x1dcc, 0x1108, 0x19b8, 0x2150, 0x402d,
    0x2fc1, 0x3fde, 0x207a, 0x7b0c, 0xb468, 0x2851, 0xd87f, 0xf0a8, 0xae51, 0xbb9d, 0x22cd, 0xeead, 0x458d, 0xda46, 0xeb87, 0x3a80,
    0x2b03, 0xb930, 0xad76, 0xafa7, 0x5c60, 0xae43, 0xa98f, 0x1272, 0x50df, 0xdd88, 0x5278, 0x5839, 0xb336, 0x013e, 0x2f35, 0xcb2a,
    0x965b, 0x3802, 0x8b97, 0x290a, 0x922f, 0x085a, 0xd202, 0x279b, 0xeddc, 0x07e1, 0x96d0, 0xb389, 0xbe81, 0x6bf6, 0x4e29, 0xc5a7,
    0xf5b4, 0xe76a, 0x1b19, 0xa2e7, 0xc15f, 0x4960, 0xfbdf, 0x6263, 0x42ef, 0xcf15, 0xed48, 0x9375, 0x430b, 0x3afa, 0x5179, 0x6a25,
    0x8cf1, 0x385d, 0xd4c8, 0x8b6b, 0xd5f6, 0xa45e, 0x1edc, 0x3205, 0x26de, 0xb992, 0x0fd4, 0x2bbd, 0x078e, 0xf9bf, 0x2015, 0x1463,
    0x27f4, 0x82b3, 0x947d, 0x3c32, 0xff8b, 0x721b, 0x3a2c, 0x87af, 0xdd46, 0x9cb6, 0x7fa1, 0x5de9, 0x36c1, 0xa636, 0x54a2, 0xe4d9,
    0x9bb7, 0x0991, 0x08c2, 0x4a9a, 0x3238, 0x1be3, 0x581d, 0x9712, 0x6040, 0x43da, 0xeb2b, 0x962c, 0x4f75, 0x88f0, 0x7d70, 0xae2e,
    0xc4e2, 0xa1fa, 0xef5f, 0xa674, 0x16e0, 0x8661, 0x0283, 0xa195, 0x8030, 0x35e8, 0xbc02, 0xca63, 0xce19, 0xf04f, 0x49b6, 0x2d09,
    0xd500, 0x52a8, 0x88e9, 0x6469, 0x2edf, 0x30cb, 0xca06, 0xab7c, 0xc397, 0xa3be, 0x890d, 0x9186, 0x92ee, 0xc99b, 0x05fc, 0xa9db,
    0x4626, 0x42f0, 0xd00a, 0x0d85, 0x58fa, 0x70f5, 0xf6d4, 0xb417, 0x572e, 0x5b48, 0xf15a, 0x4da8, 0x773b, 0x4f2b, 0xd6ae, 0xcf1b,
    0xe346, 0x7319, 0x2925, 0xbd00, 0xd96a, 0xf4b6, 0xf463, 0x21b6, 0xa6cb, 0xa95f, 0xc2a2, 0x8780, 0xf269, 0x4d86, 0x5915, 0x8e11,
    0xfaab, 0x071c, 0x6b2d, 0x95f2, 0xa2b6, 0x900e, 0x0b6d, 0xd628, 0x499d, 0x0622, 0x4418, 0x5ed8, 0x34ed, 0xa80c, 0x80fa, 0xff22,
    0xdbb2, 0x0e78, 0x961a, 0x7943, 0xd931, 0xafed, 0x162a, 0x4cab, 0x6533, 0x658e, 0xd833, 0xbce4, 0x2c85, 0x4887, 0x0d33, 0xee4c,
    0xa46c, 0x2cee, 0x23ec, 0xde87, 0x6e6a, 0x8792, 0xe07b, 0x7d39, 0xe767, 0x1614, 0x7295, 0xb4a2, 0xe29b, 0xbfcf, 0x34b3, 0xf652,
    0x3291, 0xb24a, 0x6c49, 0x86a7, 0xc445, 0x065d, 0x3b67, 0xddef, 0x351f, 0x4bf5, 0x4c5c, 0x92c4, 0xe3b1, 0x84ee, 0xaf1a, 0xe1dd,
    0xca94, 0x39ee, 0x7670, 0x156b, 0x3ef7, 0x1858, 0xd0bb, 0xbc34, 0xfc55, 0x9fd8, 0x22d2, 0xf1b2, 0xa540, 0x11c9, 0xd879, 0xf6ae,
    0xce6d, 0x843b, 0x7acf, 0x66a0, 0xc500, 0x5213, 0x3352, 0x6082, 0x8118, 0x0ccb, 0x07bf, 0xc88e, 0x01e2, 0xf3e9, 0xdc0d, 0xc6f6,
    0x97f8, 0x8aaa, 0x053c, 0x691b, 0x81d2, 0xc601, 0x600f, 0x0c95, 0x59e1, 0x7ae5, 0x4c8a, 0x4412, 0x54d2, 0x94a9, 0xe8e6, 0x68fc,
    0x773e, 0x4a2e, 0x868c, 0xef6e, 0x9745, 0x3717, 0x61eb, 0xf97a, 0xe5d0, 0x83b5, 0x8370, 0x46b5, 0xd163, 0x75e7, 0xb1e1, 0xf4ff,
    0xbd2a, 0xf340, 0x75a4, 0xf2a2, 0x864d, 0x2eaf, 0x40bb, 0xb957, 0xca11, 0xbc6b, 0xa30a, 0x3db9, 0x650b, 0x5db6, 0x699e, 0x0457,
    0x137b, 0x48dd, 0x5769, 0x1c0f, 0xc3c0, 0xf4e9, 0xab3c, 0x83d7, 0xe112, 0x055b, 0x0e7c, 0x921e, 0x396b, 0xf3f5, 0xc011, 0x1625,
    0x43a4, 0x9555, 0x0511, 0x4436, 0x70f6, 0xf5d7, 0x8409, 0x48fd, 0x7749, 0x3d59, 0x85eb, 0xbb14, 0xab44, 0xfbaf, 0x1213, 0x31be,
    0xae78, 0x92b4, 0x93c1, 0xf7bf, 0xce77, 0x9e21, 0xca20, 0x8d5a, 0x82fd, 0xda33, 0x9ef2, 0x19f3, 0x6a1b, 0xb2cf, 0xe9cc, 0x53dd,
    0xec97, 0x5da1, 0x7e89, 0x64ca, 0x8d7c, 0xa4db, 0x9b59, 0xe77f, 0x0e0c, 0xe26e, 0x4a3a, 0x9298, 0xbfed, 0x1691, 0xf710, 0x61d8,
    0xca49, 0xe433, 0x715d, 0x4f77, 0x8af2, 0x5d64, 0xbb4c, 0xf31c, 0x29f8, 0x60dd, 0xde47, 0xaeaa, 0x4066, 0x648a, 0xcd3c, 0xe677,
    0x170f, 0x7885, 0x0efc, 0x129e, 0xbc33, 0xfb52, 0xefee, 0x17c5, 0xb24f, 0x694c, 0xd685, 0xe430, 0x725e, 0x7f69, 0x9521, 0x7165,
    0x774f, 0x3b5f, 0xe5d7, 0x84b2, 0xf346, 0x73a2, 0x929e, 0xb9eb, 0x76ad, 0xc8b6, 0x39da, 0x4244, 0x64be, 0xf908, 0x97a2, 0xd0f0,
    0xf77f, 0x0eb7, 0x59d5, 0x4ed1, 0x3d5f, 0x83ed, 0xdb28, 0x94e2, 0xa3ad, 0x9a1e, 0xb133, 0x262d, 0x4a61, 0xc9c3, 0x5da4, 0x7b8c,
    0x34e8, 0xad09, 0xd0d8, 0xdf57, 0xafb1, 0x4a76, 0xded4, 0x3d39, 0xe58b, 0xd8ee, 0x6139, 0x2ba8, 0x129b, 0xb936, 0xab70, 0xcf9b,
    0x63c6, 0xf641, 0x2182, 0x92ff, 0xd88a, 0x055d, 0x087a, 0xf222, 0x06cd, 0xabf7, 0x481c, 0x96a8, 0xcbf1, 0x4d80, 0x5f13, 0xee2d,
    0xc50d, 0x5f1e, 0xe320, 0x157f, 0x2ae3, 0x48db, 0x516f, 0x7c33, 0xfc66, 0xaceb, 0x2331, 0x035a, 0x6947, 0xdd8e, 0x547e, 0x3805,
    0x8c90, 0x593c, 0xa738, 0x4ba7, 0x1e0e, 0xe0d7, 0xd195, 0x8311, 0x27d4, 0xa293, 0xb52b, 0x7a19, 0xb076, 0x7263, 0x4254, 0x74ae,
    0xe9a3, 0x3cb2, 0x7f0b, 0xf743, 0x328b, 0xa850, 0xdca6, 0x6d5d, 0x83b8, 0x8e7d, 0x96c7, 0xa49e, 0xde1c, 0xf5f1, 0xa22f, 0x0997,
    0x0ec4, 0x2aa6, 0x0d9e, 0x43e1, 0xd010, 0x179f, 0xe815, 0x9b0f, 0xb129, 0x3c37, 0xfa8e, 0x2239, 0x1a59, 0xf3ac, 0x9948, 0xd478,
    0x3bdb, 0x6153, 0x41c2, 0xd125, 0x33a1, 0x9371, 0x470f, 0x7ad2, 0x7bbd, 0x05d9, 0x8cfe, 0x3752, 0x24ae, 0xebf4, 0x49f3, 0x684c,
    0xc78e, 0xfe8b, 0x6310, 0x2097, 0x96e1, 0x82b8, 0x9f76, 0x8c7c, 0xb5d0, 0x81e2, 0xf631, 0x51f2, 0xe1ae, 0xb9e7, 0x7aa1, 0x08ce,
    0x4696, 0xf240, 0x64af, 0xe819, 0x9703, 0x7151, 0x437b, 0x4a8a, 0x2228, 0x0b48, 0xf30d, 0x38e9, 0x607c, 0x7fe6, 0x1aae, 0x045b,
    0x1f77, 0x88a5, 0x2825, 0xac0b, 0xc3d1, 0xe5f8, 0xab9d, 0x2276, 0x5516, 0x4166, 0x7581, 0xd787, 0xf739, 0x48f1, 0x7b45, 0xfd21,
    0xfaa7, 0x0b10, 0xab55, 0xeabe, 0x12b2, 0x901f, 0x1a7c, 0xd689, 0xe83c, 0xb226, 0x0025, 0x2525, 0x7174, 0x665e, 0x3bfe, 0x4476,
    0x30b6, 0xb77b, 0x085f, 0xd707, 0x77b9, 0xcda9, 0x73e2, 0xd2de, 0xfb47, 0xfafb, 0x574c, 0x392a, 0xb2b4, 0x92b7, 0x90c2, 0xc7a1,
    0xd1a4, 0xb220, 0x0623, 0x4519, 0x4ed2, 0x3e5c, 0xb3f3, 0xc4fb, 0xb8e3, 0x6fae, 0x525d, 0x7d1c, 0xc242, 0x6760, 0x14cb, 0x8f5c,
    0xa6ed, 0x8f79, 0x83c8, 0xfe0d, 0xe596, 0xc5f3, 0xa1e0, 0xf545, 0x169b, 0xfd1a, 0xc19c, 0x8aa3, 0x0c35, 0xf941, 0xdeeb, 0x0206,
    0x2410, 0x554a, 0x1d3a, 0xe7fe, 0x8f8d, 0x773c, 0x482c, 0xa698, 0xfa0c, 0xa0bb, 0xbf15, 0xee69, 0x8149, 0x5d9a, 0x45b2, 0xe579,
    0x2a1c, 0xb724, 0x5700, 0x7566, 0x3060, 0x61ad, 0xbf3c, 0xc740, 0x3045, 0x4488, 0xce48, 0xa11e, 0x0bbb, 0x00fe, 0xfefe, 0x1665,
    0x03e4, 0xd7f9, 0x8947, 0xdbcc, 0x7006, 0x0527, 0x7200, 0x2137, 0x274a, 0x3c0d, 0xc0b4, 0xb380, 0xb788, 0xfbac, 0x1110, 0x01a0,
    0xb1ab, 0xbeb5, 0x5fc2, 0x3ffc, 0x0258, 0x7a4e, 0xe721, 0x5052, 0x5005, 0x0752, 0x2563, 0x3732, 0x44ce, 0x880e, 0x838e, 0xb84b,
    0xc706, 0x7603, 0x6618, 0x7db8, 0x66e6, 0x8346, 0x7083, 0x80a2, 0xa77a, 0x09e5, 0x7cb6, 0x79e3, 0x7991, 0x0be3, 0x58a6, 0x2ca9,
    0x64ab, 0xec1d, 0xd72b, 0x5b95, 0x2c87, 0x4a85, 0x2d27, 0xfb2e, 0x9392, 0xa4ec, 0xac6e, 0xa6b4, 0xd620, 0x4195, 0x8672, 0x1190,
    0x8120, 0x34f3, 0xb612, 0x703d, 0x3e1c, 0xf3b3, 0x8657, 0x34b5, 0xf054, 0x52ad, 0x8dec, 0x344b, 0x0eaa, 0x44c8, 0x8e08, 0xe3b2,
    0x87ed, 0x9f04, 0xfe0e, 0xe695, 0xf5ed, 0xbe33, 0xd944, 0xda98, 0x3559, 0x0db3, 0x6ecc, 0x2134, 0x2449, 0x0c13, 0xdf67, 0x9f81,
    0x7b8b, 0x33ef, 0xdd3f, 0xe5cf, 0x9caa, 0x63bd, 0x8d3a, 0xe29d, 0xb9c9, 0x548f, 0xc9f4, 0x6a93, 0x3a47, 0xecc4, 0x0ef2, 0x1c90,
    0x5c5f, 0x917c, 0x6814, 0x9fd6, 0x2cdc, 0x11de, 0xcf6e, 0x9633, 0x506a, 0x683d, 0xb6ff, 0x9dd0, 0x08cc, 0x4494, 0xd254, 0x71cd,
    0xdfe7, 0x1f01, 0xfed3, 0x3b48, 0xf2c0, 0xe42f, 0x6d41, 0x9fa4, 0x5eae, 0x429b, 0xbb61, 0xde31, 0xd8dc, 0x530b, 0x3a41, 0xeac2,
    0x6ece, 0x2336, 0x045d, 0x1971, 0xe899, 0x1783, 0xf409, 0x4bdc, 0x6575, 0x23c8, 0xfaa3, 0x0f14, 0xeb7d, 0xc07a, 0x7d4e, 0x9010,
    0x1573, 0x26ef, 0x88a3, 0x2e23, 0xcc37, 0xfc77, 0xbdfa, 0x2390, 0xa2fb, 0xdd43, 0x99b3, 0x2f83, 0x7d9c, 0x42c2, 0xe238, 0x1c6c,
    0xa0a3, 0xa70d, 0x7e92, 0x7fd1, 0x2d99, 0x4590, 0xc75b, 0x2b5e, 0xe46d, 0x2f03, 0xfd1c, 0xc79a, 0xea9f, 0x3393, 0xa143, 0x56e6,
    0x828b, 0xac45, 0x8d9f, 0x4738, 0x4de5, 0x3a76, 0xddf5, 0x2f05, 0xfb1a, 0xa7a6, 0xd539, 0x6b91, 0x294e, 0xd66b, 0x0ade, 0x7490,
    0xd79d, 0xed23, 0xf81e, 0x90bf, 0xbadc, 0x7287, 0xa6b0, 0xd224, 0x01bd, 0xacb6, 0x7e6c, 0x812f, 0x3bfc, 0x4674, 0x10a2, 0xa219,
    0x3fa1, 0x5f05, 0xf83b, 0xb59a, 0xcba8, 0x14d9, 0x9d4e, 0x9652, 0x310b, 0x1bcd, 0x7633, 0x5628, 0x4c45, 0x8bdd, 0x6340, 0x70c7,
    0xc4e6, 0xa5fe, 0xaf77, 0x8cb0, 0x791c, 0x866e, 0x0d8c, 0x51f3, 0xe0af, 0xa9ed, 0x7010, 0x1331, 0x0297, 0xb581, 0xd0b3, 0xb43c,
    0x7c05, 0xca50, 0xfd2a, 0xf1ac, 0xbb5e, 0xe10e, 0x1947, 0xdeaf, 0x4642, 0x2694, 0xf3d8, 0xed3c, 0xe701, 0x7072, 0x7153, 0x4179,
    0x6a9e, 0x374a, 0x3cb6, 0x7b0f, 0xb76b, 0x184f, 0xc7ac, 0xdca9, 0x6252, 0x73de, 0xeee2, 0x0ac2, 0x688c, 0x074e, 0x397f, 0xe7e1,
    0x9092, 0x97f1, 0x83a3, 0x9566, 0x3622, 0x45d5, 0x821e, 0x39d0, 0x484e, 0xc4fa, 0xb9e2, 0x7fa4, 0x58ec, 0x66e3, 0x8643, 0x20a1,
    0xa0d7, 0xd379, 0x4deb, 0x3478, 0x3d99, 0x452b, 0x7ce0, 0x2fb5, 0x4baa, 0x1303, 0x30a5, 0xa468, 0x28ea, 0x63c4, 0xf443, 0x0196,
    0x879d, 0xef74, 0x8d5f, 0x87f8, 0x8a11, 0xbe87, 0x6df0, 0x2e15, 0xfa01, 0xadb6, 0x6f67, 0x9b94, 0x2ab2, 0x198a, 0x1362, 0x51c4,
    0xd798, 0xe826, 0xa83c, 0xb0ca, 0xcedf, 0x3689, 0xee7e, 0x965e, 0x3d07, 0xdbb5, 0x097f, 0xe62c, 0x4c54, 0x9acc, 0x63e1, 0xd166,
    0x70e2, 0xe1c3, 0xd48a, 0xc929, 0xb74e, 0x3d6a, 0xb6d8, 0xbaf7, 0x59ac, 0x37a8, 0xde54, 0xbdb9, 0x60d3, 0xd049, 0x4ec6, 0x2a48,
    0xe370, 0x452f, 0x78e4, 0x6f9d, 0x616e, 0x7cff, 0x30aa, 0xab67, 0xd88c, 0x035b, 0x6846, 0xcd84, 0x5ecf, 0x23fa, 0xc891, 0x1efd,
    0x1324, 0x1782, 0xf508, 0x5bd6, 0x6fc4, 0x3837, 0xbea2, 0x48d5, 0x5f61, 0x9c5f, 0x9648, 0x2b11, 0xab22, 0x9dc9, 0x11d5, 0xc465,
    0x267d, 0x1a31, 0x9bc4, 0x7ae2, 0x4b8d, 0x3424, 0x61c5, 0xd754, 0x24ea, 0xafb0, 0x4b77, 0xcede, 0x3788, 0xfe74, 0x9cef, 0x26f8,
    0x9fb4, 0x4ebe, 0x5230, 0x1071, 0x71ca, 0xd8e0, 0x6f37, 0xcbc4, 0x78b5, 0x3ecc, 0x2363, 0x5108, 0x1b54, 0xefaa, 0x5381, 0xb0cb,
    0xcfde, 0x2683, 0xe4cf, 0x8da1, 0x7906, 0x9c74, 0xbd63, 0xba09, 0xa752, 0x21cd, 0xddb0, 0x6a40, 0xe994, 0x0b85, 0x3ec0, 0x2f6f,
    0x9170, 0x6418, 0x5fae, 0x5390, 0xa1da, 0xcf7f, 0x8722, 0x50cb, 0xc99c, 0x02fb, 0xd9ed, 0x7331, 0x010d, 0x1c06, 0xcac9, 0x64b3,
    0xf405, 0x47d0, 0xa50d, 0x5c84, 0x4aa7, 0x0f05, 0xfa6c, 0xc0db, 0xdcef, 0x2414, 0x514e, 0x5d12, 0xcd3a, 0xe071, 0x7733, 0x4723,
    0x56fe, 0x9a93, 0x3cbe, 0x7307, 0x373b, 0x4dc7, 0x1854, 0xdcb7, 0x7c4c, 0x8319, 0x2fdc, 0x22c3, 0xe0a3, 0xa5e1, 0xb068, 0x6c7d,
    0xb293, 0xb590, 0xc1a2, 0xb49d, 0xdda4, 0x7e54, 0xb917, 0x8a51, 0xfec7, 0x2f5c, 0xa243, 0x65fb, 0xad46, 0x9f97, 0x6d9d, 0x4378,
    0x4989, 0x1236, 0x149b, 0xdf0c, 0xf4ea, 0xa83f, 0xb3c9, 0xfec1, 0x295a, 0xc27f, 0x5a5d, 0xf544, 0x179a, 0xed10, 0xcb2d, 0x915c,
    0x4834, 0xbe80, 0x6af7, 0x5e23, 0xcf16, 0xee4b, 0xa36b, 0x5cd8, 0x16fb, 0x9d7a, 0xa266, 0x40de, 0xdc32, 0xf9c9, 0x5663, 0x070e,
    0x793f, 0xa54d, 0x1cc4, 0x080b, 0x8353, 0x6596, 0xc02b, 0x2c1f, 0xd21d, 0x3884, 0x0d11, 0xcc6e, 0xa52e, 0x7fa7, 0x5bef, 0x56fd,
    0x9990, 0x0ca0, 0x6cd4, 0x1b3a, 0x81c4, 0xd017, 0x1098, 0x9823, 0xae18, 0xf2d4, 0xf03b, 0x3dc2, 0x1e70, 0x9ea9, 0x42a8, 0x8852,
    0xdfd2, 0x2a34, 0x9f0c, 0xf606, 0x66c5, 0xa065, 0x61cb, 0xd95a, 0xc486, 0xc59e, 0xcc8d, 0x46cd, 0xa91b, 0x86e6, 0x8504, 0x54fb,
    0xbd80, 0x59ea, 0x71ee, 0xfcc4, 0x0e49, 0xa72b, 0x58b4, 0x3ebb, 0x5414, 0x526f, 0x4f2e, 0xd3ab, 0x9f39, 0xc333, 0x071a, 0x6d2b,
    0xf5ce, 0x9d10, 0xc80c, 0x8360, 0x56a5, 0xc1c8, 0xdef7, 0x1e1a, 0xf4c3, 0x8116, 0x02c5, 0xe7d3, 0xa2a0, 0x8618, 0x7bfa, 0x429e,
    0xbe64, 0x8e13, 0xf8a9, 0x2708, 0x7e4f, 0xa20c, 0x2ab4, 0x1f8c, 0x735e, 0x6e62, 0x8f9a, 0x602b, 0x28b1, 0x389f, 0x160a, 0x6c8b,
    0x4465, 0x23a5, 0x97ce, 0xbc9c, 0x54fd, 0xbb86, 0x39d6, 0x4e48, 0xa4c6, 0x8644, 0x27a6, 0xd0e1, 0xe66e, 0x0e16, 0xf874, 0xfad5,
    0x7962, 0xf810, 0x9eb1, 0x5ab0, 0x18a9, 0x214a, 0x5a37, 0x9f2e, 0xd424, 0x6787, 0xf32c, 0x19c8, 0x5120, 0x337c, 0x4eac, 0x4022,
    0x20ce, 0xcfb8, 0x40e5, 0xe709, 0x787a, 0xf103, 0x14f1, 0xb566, 0x3754, 0x22a8, 0x8bc8, 0x7655, 0x304e, 0x4f83, 0x7e06, 0xeb45,
    0xf842, 0xcce3, 0x28a3, 0x2a8d, 0x26b5, 0xd2f9, 0xdc60, 0xab9b, 0x2470, 0x352a, 0x7ec0, 0x2d83, 0x5f8a, 0x77b4, 0xc0a4, 0xa390,
    0xa723, 0x50bc, 0xbeeb, 0x019c, 0x8d97, 0x4f30, 0xcdb5, 0x6ffe, 0x020d, 0x2f1b, 0xe504, 0x5761, 0x1407, 0x4390, 0xa161, 0x74c4,
    0x83c9, 0xff0c, 0xf59c, 0xcf42, 0xba1f, 0xb144, 0x515a, 0x4906, 0x9db9, 0x61a5, 0xb734, 0x4710, 0x65cd, 0x9b70, 0xce56, 0xbf00,
    0xfb7c, 0xc1c0, 0xd6ff, 0x9e4a, 0xa14b, 0x5eee, 0x02db, 0xf9cd, 0x5267, 0x4726, 0x53fb, 0xcab1, 0x1ccb, 0x0704, 0x7335, 0x0509,
    0x5c2e, 0xe00d, 0x0b4f, 0xf40a, 0x48df, 0x556b, 0x3c1b, 0xd6a2, 0xc317, 0x233e, 0x0c55, 0x9921, 0xbd11, 0xc87b, 0xf417, 0x55c2,
    0x95b2, 0xe2f6, 0xd2a2, 0x873b, 0x49d2, 0x496d, 0xf6d2, 0xb211, 0x3712, 0x64ee, 0xa958, 0xc5a5, 0xf7b6, 0xc77e, 0x0e7b, 0x9519,
    0x495d, 0xc6e2, 0x83ec, 0xda29, 0x84e8, 0xa91c, 0x81e1, 0xf532, 0x61ec, 0xfe7d, 0x95e6, 0xb6a2, 0xc08d, 0x8ab9, 0x162f, 0x49ae,
    0x3511, 0x45fb, 0xac30, 0xf8ea, 0x644b, 0x0cfd, 0x3189, 0x994f, 0xd37f, 0x4bed, 0x5444, 0x023f, 0x1d29, 0xf4ed, 0xaf38, 0xc3ff,
    0xcbd6, 0x6aa7, 0x0e73, 0x9d11, 0xc90d, 0x936a, 0x5c14, 0xda37, 0x9af6, 0x59db, 0x40df, 0xdd33, 0xe9c3, 0x5cd2, 0x1cf1, 0x3d3e,
    0xe28c, 0xa8d8, 0x542e, 0x6855, 0xde97, 0x7e7a, 0x9739, 0x4b6b, 0xd2c2, 0xe75b, 0x2a28, 0x8310, 0x26d5, 0xb299, 0xbf9a, 0x61e6,
    0xf477, 0x35a2, 0xf648, 0x288b, 0x02a5, 0x87b3, 0xc15a, 0x4c65, 0xabfd, 0x4216, 0x36ec, 0x8b1b, 0xa586, 0xd70f, 0x7fb1, 0x4df9,
    0x266a, 0x0d26, 0xfb59, 0xe4e5, 0xa78b, 0xf814, 0x9ab5, 0x1a98, 0x326d, 0x4eb6, 0x5a38, 0x9021, 0x2442, 0x0718, 0x6f29, 0xd5da,
    0x8872, 0xfff2, 0x0b62, 0xd927, 0xb9fb, 0x66bd, 0xd81d, 0x92ca, 0xedbf, 0x6482, 0xc534, 0x6627, 0x4287, 0xa77d, 0x0ee2, 0x0c80,
    0x4cf4, 0x3a6c, 0xc7ef, 0x9fea, 0x10e0, 0xe05b, 0x5d19, 0xc631, 0x503f, 0x3d68, 0xb4da, 0x9ae3, 0x4cce, 0x0056, 0x5656, 0x323b,
    0x18e0, 0x6803, 0x88c1, 0x4c41, 0x8fd9, 0x2368, 0x5a03, 0xab1a, 0xa5f1, 0xa078, 0x7cd6, 0x1983, 0x1a6b, 0xc19e, 0x88a1, 0x2c21,
    0xec23, 0xe915, 0x8a04, 0xab92, 0x2d79, 0xa570, 0x21f9, 0xe984, 0x1b95, 0x2e6b, 0x847f, 0x3e8b, 0x6424, 0x6392, 0xa215, 0x33ad,
    0x9f7d, 0x8777, 0x059e, 0xcbb9, 0x05c8, 0x9def, 0x37f3, 0x850f, 0x5ff0, 0x0dce, 0x13b1, 0x8217, 0x30d9, 0xd814, 0x9bc3, 0x7de5,
    0x3bbb, 0x0133, 0x2238, 0x1b58, 0xe3a6, 0x93f9, 0xcf87, 0x7fda, 0x2692, 0xf5de, 0x8d00, 0xd8a7, 0x2870, 0xf95e, 0xc1f4, 0xe2cb,
    0xef9f, 0x66b4, 0xd114, 0x0290, 0xb286, 0xa085, 0x812b, 0x3ff8, 0x065c, 0x3a66, 0xcde5, 0x3fae, 0x500a, 0x085d, 0xd505, 0x57ad,
    0xd8cb, 0x441c, 0x5adc, 0x74c5, 0x82c8, 0xef06, 0xff2d, 0xd4bd, 0xfe1e, 0xf685, 0xe546, 0x1523, 0x76bf, 0xdaa4, 0x0965, 0xfc36,
    0xfcbb, 0x7136, 0x241c, 0x5946, 0xdd42, 0x98b2, 0x3f89, 0x772d, 0x593d, 0xa639, 0x5bad, 0x14bf, 0xfb28, 0x9594, 0xc4d0, 0x93c8,
    0xfeb6, 0x5e2d, 0xc118, 0x0e27, 0xc945, 0xdb22, 0x9ee8, 0x03e9, 0xdaf4, 0x5935, 0xae31, 0xdbfd, 0x4137, 0x24d0, 0x958a, 0xdace,
    0x630f, 0x3f88, 0x762c, 0x4937, 0xac88, 0x4052, 0x50be, 0xbce9, 0x2188, 0x98f5, 0x78ce, 0x45b7, 0xe07c, 0x7a3e, 0x9751, 0x2303,
    0x3168, 0x78ae, 0x25d7, 0x8386, 0xb043, 0x4756, 0x238b, 0xb9e0, 0x7da6, 0x78f8, 0x7381, 0xb1bd, 0xa8a3, 0x2f55, 0xab4a, 0xf5a1,
    0xf27f, 0x5b90, 0x2982, 0x1aa7, 0x0d52, 0x8f2d, 0xd79c, 0xec22, 0xe814, 0x9a0e, 0xa123, 0x3686, 0xe171, 0x6638, 0x5d98, 0x47b0,
    0xc56d, 0x3f7e, 0x80da, 0xdf02, 0xfae4, 0x4853, 0xd9e7, 0x793b, 0xa149, 0x5cec, 0x22cf, 0xecaf, 0x6599, 0xcf24, 0xdc79, 0xb282,
    0xa481, 0xc103, 0x153c, 0x69a0, 0x3a69, 0xc2ea, 0xcfc8, 0x3095, 0x9458, 0x1917, 0x8eff, 0x1445, 0x01d2, 0xc3d9, 0xedf0, 0x2bcd,
    0x77fe, 0x8aee, 0x4178, 0x6b9f, 0x2740, 0x3607, 0x60f0, 0xf36a, 0x5f8e, 0x73b0, 0x808c, 0x8954, 0xc8df, 0x50b3, 0xb1e4, 0xf1fa,
    0xed08, 0xd335, 0x01a7, 0xb6ac, 0xce83, 0x6ad5, 0x7c01, 0xce54, 0xbd02, 0xdb68, 0xd4a2, 0xe101, 0x1648, 0x2ec9, 0x26dd, 0xba91,
    0x3fca, 0x346e, 0x2b8f, 0x35bc, 0xe856, 0xd84c, 0xc39b, 0xafb2, 0x4975, 0xeeca, 0x22ea, 0xc98a, 0x14ed, 0xa97a, 0xe787, 0xf6f4,
    0x9437, 0x7678, 0x1d63, 0xbea7, 0x4dd0, 0x0f43, 0xbc2a, 0xe24b, 0x6f1f, 0xe3ec, 0xd9b3, 0x2d6f, 0xb366, 0x516e, 0x7d32, 0xec6c,
    0xa65a, 0x38ce, 0x475b, 0x2e86, 0x6992, 0x085b, 0xd303, 0x3791, 0xe76d, 0x1c1e, 0xd2d1, 0xf448, 0x0a9d, 0x37d3, 0xa52f, 0x7ea6,
    0x4be5, 0x5c4c, 0x826f, 0x48a1, 0x2b15, 0xaf26, 0xdde1, 0x3b11, 0xab99, 0x2672, 0x153e, 0x6ba2, 0x1a7d, 0xd788, 0xf836, 0xb897,
    0x1bda, 0x6124, 0x36b5, 0xd242, 0x67db, 0xaf70, 0x8bb7, 0x092a, 0xb379, 0x4e71, 0x9dff, 0x27e3, 0x95a4, 0xf4e0, 0xa235, 0x138d,
    0xbe2b, 0xc15c, 0x4a63, 0xcbc1, 0x7db0, 0x6eee, 0x0316, 0x250b, 0x5f5a, 0xa764, 0x17fb, 0x8c71, 0xb8dd, 0x5190, 0x83cc, 0xfa09,
    0xa5be, 0xef37, 0xce1c, 0xf54a, 0x1994, 0x0d7c, 0xa103, 0x16a6, 0xc027, 0x2013, 0x1265, 0x47c8, 0xbd15, 0xcc7f, 0xb43f, 0x7f06,
    0xfa4e, 0xe2f9, 0xddad, 0x775d, 0x294d, 0xd568, 0x3ac0, 0x6b43, 0xfb9c, 0x2120, 0x305d, 0x5c90, 0x5eb3, 0x5f86, 0x7bb8, 0x00dc,
    0xdcdc, 0x1727, 0x50ad, 0xaffa, 0x013d, 0x2c36, 0xfb34, 0x8988, 0x1403, 0x4794, 0xe149, 0x5e00, 0xec35, 0xff03, 0xfa93, 0x3f24,
    0xda80, 0x2d41, 0x9d48, 0x9054, 0x5137, 0x246b, 0x2e31, 0xde25, 0xccc8, 0x0388, 0xbb95, 0x2ac5, 0x6efd, 0x1005, 0x05be, 0xeb99,
    0x249e, 0xdbc4, 0x780e, 0x8577, 0x2788, 0xfecf, 0x2754, 0x2213, 0x3073, 0x72be, 0x9f89, 0x7383, 0xb3bf, 0x88b7, 0x3a37, 0x9cb4,
    0x7da3, 0x7dfd, 0x23a3, 0x91c8, 0xdca0, 0x6b5b, 0xe384, 0xb1db, 0xcec5, 0x2c93, 0x5e91, 0x7da4, 0x7afa, 0x5395, 0xa4df, 0x9f5d,
    0xa757, 0x24c8, 0x8d92, 0x4a35, 0x9d97, 0x4f8b, 0x760e, 0x6b15, 0xadca, 0x131b, 0x28bd, 0x3493, 0xd672, 0x13c7, 0xf461, 0x23b4,
    0x86df, 0xbc3d, 0xf55c, 0x0f82, 0x7deb, 0x35b5, 0xe15f, 0x4816, 0x9ca2, 0x6bb5, 0x0d6a, 0xb715, 0x6631, 0x5491, 0xd7ea, 0x9a54,
    0xfb79, 0xc4c5, 0x86dd, 0xbe3f, 0xd548, 0x1ae0, 0x4a15, 0xbdb7, 0x6edd, 0x3025, 0x24e8, 0xadb2, 0x6b63, 0xdbbc, 0x0076, 0x7676,
    0x136d, 0x5ecb, 0x27fe, 0x88b9, 0x3439, 0x7cd8, 0x178d, 0xfa07, 0xabb0, 0x0f5b, 0xa432, 0x72b0, 0x9187, 0x93ef, 0xd991, 0x0f4d,
    0xb224, 0x0227, 0x0531, 0x6416, 0x51a0, 0xb3fc, 0xcbf4, 0x4885, 0x0f31, 0xce58, 0xb10e, 0x1b10, 0xabee, 0x5105, 0x1659, 0x3fd8,
    0x267c, 0x1b30, 0x8bce, 0x7053, 0x5072, 0x7025, 0x2604, 0x6348, 0x78cf, 0x44b6, 0xf076, 0x708f, 0x8cae, 0x6702, 0x76a9, 0xccb2,
    0x79f2, 0x6880, 0x0b42, 0xf907, 0x98ad, 0x2096, 0x97e0, 0x92b2, 0x95c7, 0x9783, 0xf1d1, 0xc623, 0x422d, 0x0dd7, 0x0aa8, 0x02e6,
    0xc4f0, 0xb3e8, 0xdfe0, 0x1806, 0x8ee5, 0x0e5f, 0xb13d, 0x2823, 0xaa0d, 0xa3ed, 0xda5e, 0xf39f, 0xaa7b, 0xd59b, 0xc933, 0xad54,
    0x8d85, 0x5d22, 0xfd0a, 0xd18c, 0x9a08, 0xa725, 0x56ba, 0xded7, 0x3e3a, 0xd595, 0xc73d, 0x4d38, 0xe7ab, 0xdad8, 0x7519, 0x4f1f,
    0xe29a, 0xbece, 0x24b9, 0xfce3, 0x296e, 0xf64b, 0x2b88, 0x32bb, 0x9860, 0xed5b, 0x8066, 0x63be, 0x8e39, 0xd283, 0xa61a, 0x788e,
    0x05f7, 0xa2d0, 0xf668, 0x08ab, 0x23f3, 0xc198, 0x8ea7, 0x4c1d, 0xd385, 0xb117, 0x0209, 0x2b1f, 0xa52c, 0x7da5, 0x7bfb, 0x439f,
    0xae6e, 0x84a2, 0xe356, 0x6309, 0x398e, 0x1610, 0x7691, 0xf48a, 0xc85f, 0xd033, 0x34bc, 0xf95d, 0xc2f7, 0xd2d5, 0xf04c, 0x4ab5,
    0x1d17, 0xcad3, 0x7ea9, 0x44ea, 0xac2a, 0xe2f0, 0xd4a4, 0xe707, 0x7674, 0x116f, 0x7edf, 0x329c, 0xbf47, 0xbc3b, 0xf35a, 0x6fbe,
    0x424d, 0x6db7, 0x6952, 0xc89b, 0x14f7, 0xb360, 0x5768, 0x1d0e, 0xd3ca, 0xfe58, 0xb0c3, 0xc7d6, 0xa6d3, 0xb147, 0x5259, 0x7918,
    0x826a, 0x4da4, 0x7b37, 0x8f53, 0xa9e2, 0x7f1f, 0xe357, 0x6208, 0x2984, 0x1ca1, 0x6d6e, 0xb08b, 0x8f9e, 0x642f, 0x6899, 0x125b,
    0x79f6, 0x6c84, 0x4b6a, 0xd3c3, 0xf751, 0x2099, 0x98ef, 0x62d4, 0xf558, 0x0b86, 0x3dc3, 0x1f71, 0x8ea3, 0x4819, 0x93ad, 0x9bd3,
    0x6df5, 0x2b10, 0xaa23, 0x8dc3, 0x1b64, 0xdf9a, 0x627c, 0x5df0, 0x2fd8, 0x26c7, 0xa08b, 0x8f25, 0xdf94, 0x6c72, 0xbd9c, 0x45f6,
    0xa13d, 0x2898, 0x11b6, 0xa706, 0x7599, 0xcf9f, 0x67c2, 0xb669, 0x0b46, 0xfd03, 0xd885, 0x0a52, 0xf81c, 0x92bd, 0x9ac8, 0x67e5,
    0x914e, 0x5a26, 0x8e3f, 0xd485, 0xc626, 0x4728, 0x5df5, 0x2add, 0x76e5, 0x80fe, 0xfb26, 0x9b9a, 0x24bc, 0xf9e6, 0x794c, 0xd63e,
    0x5f8b, 0x76b5, 0xd0ae, 0xa921, 0xbcdc, 0x14bd, 0xf92a, 0xb580, 0xd1b2, 0xa436, 0x76b4, 0xd1af, 0xb92b, 0xb66d, 0x0f42, 0xbd2b,
    0xf241, 0x65ae, 0xf813, 0x9db2, 0x6aae, 0x077a, 0x0d4b, 0x9634, 0x576d, 0x180b, 0x83e8, 0xde2d, 0xc4c0, 0x83d8, 0xee1d, 0xf53d,
    0x6ee3, 0x0e1b, 0xf579, 0x2aa7, 0x0c9f, 0x53eb, 0xdaa1, 0x0c60, 0xac14, 0xdcce, 0x0535, 0x6012, 0x1188, 0x9938, 0xa408, 0x488a,
    0x003e, 0x3e3e, 0xd191, 0x8715, 0x67fc, 0x8857, 0xdad7, 0x7a16, 0xbf79, 0x8205, 0x22cb, 0xe8ab, 0x25b1, 0xe5e0, 0xb385, 0xb28d,
    0xab8e, 0x3165, 0x75a3, 0xf5a5, 0xf67b, 0x1bb8, 0x0346, 0x755b, 0x0d5d, 0x8022, 0x27fa, 0x8cbd, 0x7411, 0x561c, 0x7871, 0xfa08,
    0xa4bf, 0xff3d, 0xc4ad, 0xeeb5, 0x5d95, 0x4abd, 0x151f, 0x4a83, 0x2b21, 0x9b12, 0xac34, 0xfcee, 0x2463, 0x2639, 0x5e75, 0x9940,
    0xdc70, 0xbb8b, 0x34db, 0x9e3a, 0xd13b, 0x2dbf, 0x63b6, 0x8631, 0x52d3, 0xf392, 0xa776, 0x05e9, 0xbcce, 0x06af, 0xc995, 0x0bf2,
    0x49b7, 0x2c08, 0xc50a, 0x5819, 0x9316, 0x2068, 0x691e, 0x84d7, 0x9623, 0x407a, 0x7896, 0x1def, 0x322b, 0x08f0, 0x78a8, 0x23d1,
    0xe3ba, 0x8fe5, 0x1f54, 0xab86, 0x396d, 0xf5f3, 0xa02d, 0x2983, 0x1ba6, 0x1d58, 0x859c, 0xcc63, 0xa823, 0xafd5, 0x2e12, 0xfd06,
    0xdd80, 0x5a70, 0xd869, 0xe6be, 0xdec6, 0x2f2b, 0xd534, 0x669c, 0xf93c, 0xa396, 0xa125, 0x3080, 0x814d, 0x599e, 0x059a, 0xcfbd,
    0x45e0, 0xb72b, 0x580f, 0x8500, 0x50ff, 0xfda8, 0x732e, 0x1e12, 0xfccb, 0x0146, 0x574d, 0x382b, 0xa2be, 0x9806, 0x8b3d, 0x83a0,
    0x9665, 0x063c, 0x5a06, 0xae1f, 0xf5d3, 0x800d, 0x08d5, 0x5d8d, 0x52a5, 0x85e4, 0xb41b, 0x5b22, 0x9b30, 0x8e16, 0xfdac, 0x772a,
    0x5e3a, 0xd60f, 0x6eba, 0x5742, 0x3724, 0x52d8, 0xf899, 0x1738, 0x4fb2, 0x4f37, 0xcab2, 0x1fc8, 0x371a, 0x6ce6, 0x2908, 0x902d,
    0x284e, 0xc760, 0x1065, 0x65de, 0x8863, 0xeee3, 0x0bc3, 0x7886, 0x0dff, 0x2280, 0xa3e0, 0xd753, 0x23ed, 0xdf86, 0x7e60, 0x8d23,
    0xfb84, 0x3938, 0xa0a6, 0xa208, 0x2eb0, 0x5fa4, 0x599a, 0x019e, 0x8f95, 0x6f24, 0xd8d7, 0x5800, 0x8a0f, 0xa099, 0x9d37, 0xef2b,
    0xd200, 0x2599, 0xcdc8, 0x1283, 0xa12e, 0x3b8b, 0x3103, 0x13c5, 0xf663, 0x03a0, 0x93bd, 0x8bc3, 0x7d5e, 0x8000, 0x05d8, 0x8dff,
    0x2758, 0x2e1f, 0xf00b, 0x0df2, 0x2f8d, 0x7392, 0xa2ae, 0x8816, 0x9b96, 0x28b0, 0x399e, 0x0600, 0x663a, 0x5f9a, 0x67a4, 0xd00f,
    0x0880, 0x08d8, 0x5080, 0x82d7, 0xf019, 0x1fe0, 0x1f32, 0xcde0, 0x3aab, 0x0028, 0x2828, 0xa106, 0x13a3, 0x9005, 0x0066, 0x6666,
    0x03c6, 0xf5db, 0x8805, 0x8885, 0x0805, 0x8d5d, 0x85fa, 0xaa05, 0xabe5, 0x5a0e, 0xa617, 0x7583, 0xd585, 0xd72d, 0x5d93, 0x4cbb,
    0x7523, 0x7525, 0x7323, 0x131f, 0x2cb9, 0x74bb, 0xfcb6, 0x7c3b, 0xf46e, 0x2cbb, 0x76b9, 0xdca2, 0x6959, 0xc390, 0xa4b9, 0xf93b,
    0xa491, 0xd113, 0x0597, 0xc2b0, 0x9592, 0xc2d6, 0xf3f4, 0xc110, 0x062f, 0x4915, 0x8eaa, 0x4110, 0x03f7, 0xc4ea, 0xa9f2, 0x6f0f,
    0xf3fc, 0xc918, 0x867f, 0x1c9d, 0x5152, 0x410e, 0x1de9, 0x342d, 0x68cc, 0x470e, 0x7bd3, 0x6bb7, 0x0f68, 0x9701, 0x7353, 0x636f,
    0x5fe8, 0x15d6, 0x834a, 0x7c8f, 0x40da, 0xd836, 0xb9e1, 0x7ca7, 0x68f2, 0x7930, 0xaa42, 0xeca2, 0x6894, 0x1f56, 0xa984, 0x1979,
    0xe091, 0x97d3, 0xa181, 0x9424, 0x656b, 0x3dd6, 0x0a64, 0xce2a, 0xc37c, 0x4855, 0xdfe1, 0x1907, 0x9eef, 0x04ee, 0xaac2, 0x6c22,
    0xedcc, 0x17f1, 0x867b, 0x1899, 0x117a, 0x6bca, 0x7215, 0x3422, 0x67c3, 0xb768, 0x1b4c, 0xf7b2, 0xc37a, 0x4e53, 0xbfdd, 0x26a1,
    0xc6ed, 0x8ce3, 0x2a4f, 0xe477, 0x3519, 0x4df3, 0x2c60, 0xad62, 0xbbb3, 0x0ce3, 0x2f97, 0x6988, 0x1241, 0x63ec, 0xdc6b, 0xa090,
    0x943e, 0x7f71, 0x8d39, 0xe19e, 0x89d7, 0x4b5c, 0xe5f5, 0xa690, 0xf204, 0x20eb, 0xea9d, 0x3191, 0x8157, 0x4384, 0xb575, 0x2447,
    0x021d, 0x3f0b, 0xf5af, 0xfc71, 0xbbfc, 0x43ac, 0x9d5d, 0x8541, 0x11be, 0xaf0e, 0xf5c9, 0x9a17, 0xb83a, 0xb677, 0x1558, 0x0dc4,
    0x19bb, 0x2253, 0x7033, 0x3012, 0x13df, 0xec79, 0xb34f, 0x7847, 0xcc3e, 0xf57e, 0x2da0, 0x7ca9, 0x66fc, 0x995c, 0xc06c, 0x6b58,
    0xe087, 0x81c5, 0xd116, 0x0092, 0x9292, 0xb5e7, 0xb6d5, 0xb7fa, 0x89de, 0x4255, 0x75af, 0xf9a9, 0x3603, 0x64f4, 0xb342, 0x754a,
    0x1c4c, 0x8083, 0x865b, 0x38b9, 0x302c, 0x2de1, 0x3de8, 0x345a, 0x1fbb, 0x4469, 0x2fa9, 0x57b6, 0xc3d0, 0xe4f9, 0xbb97, 0x28c7,
    0x4ee9, 0x0567, 0x3240, 0x639b, 0xab1c, 0xa3f7, 0xc044, 0x4370, 0x4181, 0x9266, 0x4113, 0x00f4, 0xf4f4, 0xb621, 0x430e, 0x3fff,
    0x015b, 0x4a50, 0xf8f2, 0x7c53, 0x9c06, 0xcf11, 0xe94c, 0xd35d, 0x69cf, 0x5506, 0x5176, 0x652a, 0x7c97, 0x58c2, 0x48cd, 0x4779,
    0x0ca4, 0x68d0, 0x5b12, 0xab00, 0xbfeb, 0x1097, 0x972c, 0x5e7e, 0x924b, 0x6c3e, 0xf1d0, 0xc722, 0x5227, 0x0766, 0x1157, 0x46e7,
    0x8331, 0x07f4, 0x83c5, 0xf300, 0x35e4, 0xb00e, 0x0a1b, 0xb155, 0x404b, 0x49a7, 0x3c18, 0xd5a1, 0xf309, 0x3ced, 0x2054, 0x5522,
    0x7552, 0x0454, 0x1078, 0x78c3, 0x48ba, 0x300e, 0x0fc3, 0x3caa, 0x6713, 0x67b8, 0xcc13, 0xd853, 0xdc84, 0x4f7f, 0x82fa, 0xdd34,
    0xeec4, 0x2ce4, 0x29e6, 0x7ec3, 0x2e80, 0x6f94, 0x6867, 0xeca5, 0x6f93, 0x6f60, 0x9c93, 0x5a84, 0x2c9d, 0x509f, 0x9dc8, 0x10d4,
    0xd46f, 0x2ccc, 0x01ce, 0xdfc5, 0x3d23, 0xff91, 0x6801, 0x8ac3, 0x6c55, 0x9abb, 0x1496, 0xd201, 0x2498, 0xddc2, 0x1832, 0xbad1,
    0x7f8a, 0x76c2, 0xa7d9, 0xaa46, 0xe8a6, 0x28bc, 0x3592, 0xc678, 0x1976, 0xef9e, 0x67b5, 0xc11e, 0x0821, 0xa979, 0xe484, 0xc6ea,
    0x8be4, 0x5a79, 0xd160, 0x76e4, 0x81ff, 0xeb2c, 0x912b, 0x3f43, 0xbde7, 0x3e8d, 0x6222, 0x03ae, 0x9db3, 0x6baf, 0x1770, 0x07fa,
    0x8dcb, 0x136c, 0x5fca, 0x37f4, 0x8208, 0x2fc6, 0x38d9, 0x504c, 0x4e1b, 0xf795, 0xe45d, 0x1f33, 0xcce1, 0x2aa1, 0x0a99, 0x33d7,
    0xe507, 0x5462, 0x2419, 0x5c43, 0x8d60, 0xb8c7, 0x4b8a, 0x3323, 0x11f3, 0xe243, 0x6717, 0x63bc, 0x8c3b, 0xf297, 0xb378, 0x4f70,
    0x8df5, 0x2d52, 0x8e5b, 0xb0e1, 0xe5f4, 0xa791, 0xe20e, 0x2a5a, 0xf162, 0x7590, 0xc696, 0xf798, 0xe950, 0xcf41, 0xb91c, 0x815a,
    0x4e89, 0x6507, 0x51ba, 0xa9e6, 0x7b1b, 0xa37f, 0x48cc, 0x4678, 0x1cae, 0x6261, 0x40ed, 0xef01, 0xf82a, 0xa48b, 0xcb09, 0xb578,
    0x294a, 0xd26f, 0x4af6, 0x5e54, 0xb861, 0xed2c, 0xf711, 0x60d9, 0xda43, 0xee82, 0x6aa2, 0x0b76, 0xcd33, 0xe978, 0xe769, 0x181a,
    0x92f9, 0xde8c, 0x6561, 0x37dc, 0xaa20, 0x8ec0, 0x2b7a, 0xc049, 0x4e7d, 0x91f3, 0xe79b, 0xeae8, 0x44e4, 0xa224, 0x029c, 0xbe8a,
    0x60fd, 0xfe67, 0x8ffc, 0x064d, 0x2b77, 0xcd44, 0x9e0f, 0xe40e, 0x4c60, 0xaef8, 0x1234, 0x1699, 0xff18, 0xe188, 0x9fc1, 0x3bcb,
    0x7143, 0x5169, 0x7a35, 0x9c5a, 0x934d, 0x7b33, 0x8b57, 0xe9ca, 0x55db, 0x8cab, 0x6207, 0x268b, 0xecc7, 0x0df1, 0x2c8e, 0x438c,
    0xbd7d, 0xa417, 0x5795, 0xe0f3, 0xf5b1, 0xe26f, 0x4b3b, 0x8292, 0xb55c, 0x0d6e, 0xb311, 0x2619, 0x7e55, 0xb816, 0x9a5b, 0xf476,
    0x34a3, 0xe642, 0x223a, 0x195a, 0xc3b2, 0x869b, 0xf879, 0xf7d8, 0xa910, 0x8ded, 0x354a, 0x1ea0, 0x4e79, 0x95f7, 0xa7b3, 0xc02c,
    0x2b18, 0xa22b, 0x0d93, 0x4eec, 0x0062, 0x6262, 0x43ee, 0xdf1f, 0xe7f9, 0x888a, 0x070a, 0x7d3b, 0xe565, 0x3600, 0x67f7, 0x835c,
    0x6a99, 0x304d, 0x4c80, 0x4e18, 0xf496, 0xd443, 0x00e0, 0xe0e0, 0xe6a2, 0xc2da, 0xfff8, 0x0168, 0x7963, 0xf911, 0x8ebb, 0x5001,
    0x0356, 0x654b, 0x1df6, 0x2b32, 0x8801, 0x8c81, 0x482d, 0xa799, 0xea06, 0xaa0a, 0xa4ea, 0xaa68, 0xc688, 0xe986, 0x1997, 0x0e7f,
    0x911d, 0x0975, 0xec26, 0xec10, 0xda26, 0x8be7, 0x597a, 0xe17e, 0x6937, 0xadfe, 0x272f, 0x5968, 0xf36c, 0x5988, 0x138c, 0xbf2a,
    0xd156, 0x40d2, 0xd03e, 0x39b1, 0x292f, 0xb70a, 0x792e, 0xb45c, 0x1c65, 0xa9aa, 0x3757, 0x21ab, 0xbbd6, 0x6986, 0x1c4f, 0x8380,
    0xb645, 0x276a, 0x1c2d, 0xe1e2, 0xf5ab, 0xf875, 0xfbd4, 0x6968, 0xf2a1, 0x854e, 0x1eb1, 0x5f68, 0x9556, 0x0612, 0x7428, 0x6f25,
    0xd9d6, 0x480a, 0x80be, 0xbb66, 0xd936, 0xa8ea, 0x661c, 0x79bc, 0x26ce, 0xa982, 0x1f7f, 0x80ad, 0xa875, 0xf983, 0x1c29, 0xe5e6,
    0xb583, 0xd2b1, 0x9428, 0x6967, 0xfdae, 0x7528, 0x7e2e, 0xc36d, 0x5944, 0xdf40, 0xb8a6, 0x2aeb, 0x40d3, 0xd13f, 0x29bb, 0x239e,
    0xacf5, 0x3d2f, 0xf39d, 0xa879, 0xf58f, 0xdc51, 0x9aaa, 0x0587, 0xd2a0, 0x8539, 0x69c6, 0x5c0f, 0xc12c, 0x3a13, 0xb890, 0x1cdd,
    0x1112, 0x03a2, 0x91bf, 0xabd7, 0x683c, 0xb7fe, 0x8dda, 0x027d, 0x5f6b, 0x9655, 0x360c, 0x6bfb, 0x4324, 0x15d5, 0x8049, 0x4c91,
    0x5f09, 0xf437, 0x75e2, 0xb4e4, 0xa4dd, 0x9d5f, 0x8743, 0x31aa, 0xba6c, 0xc237, 0x1215, 0x37b8, 0xce44, 0xad12, 0xcbc3, 0x7fb2,
    0x4efa, 0x1674, 0x12f5, 0xd758, 0x28e6, 0x6fc8, 0x343b, 0x7eda, 0x3799, 0xef65, 0x9c4e, 0x8759, 0x2bb0, 0x0a83, 0x29cd, 0x55e8,
    0xbf98, 0x63e4, 0xd463, 0x20c0, 0xc1b6, 0xa089, 0x8d27, 0xff80, 0x7910, 0x8a62, 0xcdf4, 0x2ebf, 0x50ab, 0xa9fc, 0x6101, 0x1390,
    0xa336, 0x0185, 0x948e, 0xcfc1, 0x399c, 0x0402, 0x462e, 0x4af8, 0x505a, 0x580d, 0x8702, 0x70eb, 0xe8ca, 0x44d0, 0x9610, 0x7349,
    0x7975, 0xef07, 0xfe2c, 0xc4b7, 0xf4af, 0xed7a, 0xa147, 0x52e2, 0xc2a3, 0x8681, 0xe263, 0x4737, 0x42ea, 0xca10, 0xbd6a, 0xb300,
    0x3708, 0x7ef4, 0x19b7, 0x2e5f, 0xb04b, 0x4f5e, 0xa3db, 0xec68, 0xa25e, 0x78e6, 0x6d9f, 0x417a, 0x699d, 0x0754, 0x2365, 0x570e,
    0x7b68, 0xd00c, 0x0b83, 0x38c6, 0x4f53, 0xaed6, 0x3c1a, 0xd7a3, 0xd31d, 0x298f, 0x17aa, 0xdd20, 0xfad0, 0x7c67, 0xa832, 0xbec4,
    0x2eb3, 0x5ca7, 0x6984, 0x1e4d, 0xa394, 0xa327, 0x1094, 0x942f, 0x6e60, 0x8d98, 0x403f, 0x3dd3, 0x0f61, 0x9e08, 0xe309, 0x3c56,
    0x9bef, 0x51c9, 0xda95, 0x3854, 0xddc1, 0x1b31, 0x8acf, 0x6059, 0x5ac3, 0x6bda, 0x6205, 0x2489, 0xccd3, 0x1893, 0x1b70, 0xcb8e,
    0x32ff, 0xdc24, 0xefdf, 0x26f4, 0x93b8, 0x8ec6, 0x2d7c, 0xa075, 0x71db, 0xc9f1, 0x6f96, 0x6a65, 0xccb1, 0x7af1, 0x589e, 0x1491,
    0xd506, 0x54ae, 0xe8d5, 0x5bcf, 0x76dd, 0xb8c6, 0x4a8b, 0x2329, 0x1b42, 0xf9bc, 0x2316, 0x247d, 0x3827, 0xaeb2, 0x587e, 0xf471,
    0x33a4, 0x9674, 0x172d, 0x5aa7, 0x0fbe, 0x41d7, 0xc430, 0x7328, 0x1814, 0x9cf7, 0x3ee0, 0x0f4f, 0xb026, 0x2233, 0x1053, 0x53e8,
    0xd9a2, 0x3c7e, 0xb3c7, 0xf0cf, 0xc936, 0xa851, 0xdda7, 0x7d57, 0x8909, 0x9582, 0xd2c6, 0xe35f, 0x6a00, 0xa9d4, 0x4929, 0xb296,
    0xb095, 0x9180, 0x94e8, 0xa9a7, 0x3a5a, 0xf1d9, 0xce2b, 0xc27d, 0x585f, 0xd550, 0x02f8, 0xdaee, 0x432f, 0x1ede, 0x3007, 0x06ca,
    0xacf0, 0x382a, 0xa3bf, 0x880c, 0x818c, 0x985f, 0xd264, 0x41fd, 0xee1a, 0xf23a, 0x1ed5, 0x3b0c, 0xb684, 0xe6ab, 0xcbd3, 0x6fa2,
    0x5e51, 0xbd64, 0xbd0e, 0xd764, 0x14da, 0x9e4d, 0xa64c, 0x2ed8, 0x37cc, 0xba30, 0x9e6b, 0x806a, 0x6fb2, 0x4e41, 0xadcf, 0x161e,
    0x789f, 0x14e6, 0xa271, 0x57c9, 0xbcaf, 0x67ce, 0xba65, 0xcb3e, 0x824f, 0x6881, 0x0a43, 0xe90d, 0x921c, 0x3b69, 0xd3e1, 0xd573,
    0x21db, 0xcba6, 0x1ad7, 0x7d22, 0xfc7c, 0xb6f1, 0x93de, 0xe8a0, 0x2eba, 0x55ae, 0xf9de, 0x4174, 0x6793, 0xe738, 0x494b, 0xd0f4,
    0xf37b, 0x4e9f, 0x7311, 0x212d, 0x3d50, 0x8ce2, 0x2b4e, 0xf47d, 0x3fa8, 0x560c, 0x6861, 0xeaa3, 0x0faf, 0x50c6, 0xc491, 0xd289,
    0xac10, 0xd8ca, 0x451d, 0x4ad6, 0x7e74, 0x9937, 0xab07, 0xb8ec, 0x60a1, 0xa23b, 0x1d83, 0x5e47, 0xab72, 0xcd99, 0x43d2, 0xe323,
    0x167c, 0x1afd, 0x5708, 0x7d6e, 0xb030, 0x3425, 0x60c4, 0xc75e, 0x2e5b, 0xb44f, 0x0f76, 0x891f, 0x8394, 0xa251, 0x77e9, 0x9df9,
    0x21e5, 0xf598, 0xcb46, 0xfa37, 0x9b80, 0x3ea6, 0x4909, 0x92b6, 0x91c3, 0xd7ab, 0xdb15, 0xa9df, 0x4222, 0x02d8, 0xface, 0x6279,
    0x58f5, 0x7ffa, 0x06b2, 0xd488, 0xcb2b, 0x975a, 0x2808, 0x8126, 0x32f5, 0xd62e, 0x4f9b, 0x661e, 0x7bbe, 0x06da, 0xbce0, 0x2881,
    0x08af, 0x27f7, 0x81b0, 0xa463, 0x23e1, 0xd38a, 0xbe18, 0xf26f, 0x4b80, 0x3929, 0xb1b7, 0xa2a9, 0x8f11, 0xeba0, 0x1da7, 0x7a63,
    0xca0c, 0xa176, 0x63d3, 0xe354, 0x610b, 0x199a, 0x0372, 0x416f, 0x7c88, 0x47dd, 0xa800, 0x8cf6, 0x3f5a, 0xa4fe, 0xbe7c, 0x960b,
    0x6852, 0xd990, 0x0e4c, 0xa22e, 0x0896, 0x1ece, 0x2017, 0x1661, 0x07e0, 0x97d1, 0xa383, 0xb430, 0x7009, 0x0a28, 0x8266, 0x41a8,
    0xbb4f, 0xf01f, 0x19e6, 0x7f0e, 0xf246, 0x62a9, 0x8825, 0xa8a5, 0x2953, 0xcb76, 0xca07, 0xaa7d, 0xd39d, 0xa90f, 0x92f2, 0xd587,
    0xd52f, 0x7d87, 0x59d9, 0x42dd, 0xfd27, 0xfca1, 0x6b2c, 0x94f3, 0xb2bc, 0x9abf, 0x1092, 0x9229, 0x0e5c, 0xb23e, 0x183d, 0xb5de,
    0x8fec, 0x165d, 0x3bdc, 0x6654, 0x31f4, 0xe432, 0x705c, 0x5f7d, 0x8043, 0x469b, 0xff4d, 0xb4dd, 0x9de4, 0x3cf8, 0x3541, 0x15ab,
    0xfe37, 0xdfac, 0x544a, 0x0c31, 0xfd45, 0x9ec3, 0x28c2, 0x4bec, 0x5545, 0x1235, 0x1798, 0xef12, 0xeb39, 0x843e, 0x7fca, 0x3682,
    0xe575, 0x2610, 0x775c, 0x284c, 0xc562, 0x3071, 0x70bc, 0xbf9d, 0x66e1, 0x8441, 0x00b5, 0xb5b5, 0xe487, 0xc5e9, 0xbbfa, 0x45aa,
    0xfd61, 0xbae7, 0x49bc, 0x2703, 0x7544, 0x1242, 0x60ef, 0xec75, 0xbf43, 0xb83f, 0xb372, 0x457a, 0x2db1, 0x6db8, 0x665d, 0x38fd,
    0x7468, 0x2f65, 0x9b7a, 0xc45c, 0x1f44, 0xbb96, 0x29c6, 0x5ee3, 0x0fd6, 0x29bf, 0x279a, 0xecdd, 0x17eb, 0x9c61, 0xa876, 0xfa80,
    0x2c37, 0xfa35, 0x9982, 0x1eb2, 0x5c6b, 0xa548, 0x19c1, 0x5829, 0xa326, 0x1195, 0x8425, 0x64d1, 0x9667, 0x043e, 0x7a12, 0xbb7d,
    0xc22d, 0x080f, 0x8757, 0x25be, 0xeaef, 0x43e3, 0xd212, 0x378b, 0xfd77, 0xacf1, 0x392b, 0xb3b5, 0x82bd, 0x9a73, 0xdc5e, 0x95a5,
    0xf5e1, 0xb23f, 0x193c, 0xa5d4, 0x855d, 0x0da2, 0x7fdd, 0x2195, 0x85e8, 0xb817, 0x9b5a, 0xe47c, 0x3e12, 0xfdbd, 0x663b, 0x5e9b,
    0x77ae, 0xdabe, 0x137f, 0x4cd9, 0x1741, 0x36cb, 0xac3c, 0xf4e6, 0xa433, 0x73b1, 0x818d, 0x995e, 0xc26e, 0x4b4c, 0xf5e5, 0xb63b,
    0x5914, 0x8f10, 0xeaa1, 0x0dad, 0x70d2, 0xd1f3, 0xe577, 0x2412, 0x5748, 0x3d2e, 0xf29c, 0xb873, 0xff3e, 0xc7ae, 0xdeab, 0x4246,
    0x66bc, 0xd91c, 0x82c0, 0xe70e, 0x7f7d, 0x8135, 0x21e6, 0xf69b, 0xfb58, 0xe5e4, 0xb781, 0xf2a5, 0x814a, 0x5e99, 0x75ac, 0xfaaa,
    0x061d, 0x7b27, 0x9f43, 0xb949, 0xd40f, 0x4cac, 0x6234, 0x15b8, 0xed24, 0xff19, 0xe089, 0x8fcb, 0x317a, 0x6abc, 0x1568, 0x3df4,
    0x2846, 0xcf68, 0x9035, 0x3056, 0x579b, 0xeefd, 0x15dd, 0x8841, 0xccc1, 0x0a81, 0x2bcf, 0x75fc, 0xaafa, 0x541a, 0x5c61, 0xaf42,
    0xb985, 0x18c3, 0x4b20, 0x9989, 0x15b9, 0xec25, 0xef13, 0xea38, 0x9434, 0x757b, 0x2d7d, 0xa174, 0x61d1, 0xc340, 0x7469, 0x2e64,
    0x8b70, 0xceed, 0x04bb, 0xff97, 0x6e07, 0xeaff, 0x53f3, 0xc2b9, 0x9c9b, 0x528c, 0xaccd, 0x0517, 0x4230, 0x10ca, 0xca71, 0xdc0b,
    0xc0f0, 0xf7c4, 0xb50c, 0x5d3e, 0xe116, 0x015f, 0x4e54, 0xb8da, 0x5697, 0xf3fa, 0xcf1e, 0xe643, 0x233b, 0x0950, 0xc903, 0x9d64,
    0xbc78, 0xb019, 0x1d0c, 0xd1c8, 0xde4c, 0xa5a1, 0xf028, 0x2ed1, 0x3ec5, 0x2a6a, 0xc152, 0x446d, 0x2bad, 0x179e, 0xe914, 0x8b05,
    0xbb98, 0x27c8, 0xbe8f, 0x65f8, 0xae45, 0xaf89, 0x724e, 0x6f79, 0x858a, 0xda75, 0xd8b4, 0x3b63, 0xd9eb, 0x7537, 0x6131, 0x23a0,
    0x92cb, 0xecbe, 0x7488, 0xcf85, 0x7dd8, 0x0686, 0xe0bc, 0xbafe, 0x50a5, 0xa7f2, 0x816d, 0x79be, 0x24cc, 0x8996, 0x0a1d, 0xb753,
    0x2077, 0x7601, 0x641a, 0x5dac, 0x7384, 0xb4b8, 0xf881, 0x0f20, 0xdf49, 0xb1af, 0xbab1, 0x1fea, 0x1538, 0x6da4, 0x7a41, 0xe82e,
    0xa034, 0x309a, 0x9b57, 0xe971, 0xee60, 0x8840, 0xcdc0, 0x1a8b, 0x217e, 0x6e03, 0xeefb, 0x13db, 0xe87d, 0xf367, 0x5283, 0xa3c2,
    0xf571, 0x22af, 0x8ccf, 0x0663, 0x0559, 0x0c7e, 0xb20a, 0x2c09, 0xc40b, 0x4813, 0x99a7, 0x3b97, 0x2d1f, 0xc316, 0x223f, 0x1c5f,
    0x9390, 0xa6ee, 0x8c7a, 0xb3d6, 0xe1de, 0xc997, 0x09f0, 0x69a3, 0x396a, 0xf2f4, 0xd01b, 0x1c94, 0x585b, 0xd154, 0x42d0, 0xf02a,
    0x2cd3, 0x1ed1, 0x3f08, 0xf6ac, 0xcc6f, 0xa42f, 0x6fad, 0x515e, 0x4d02, 0xdd91, 0x4b61, 0xd8c8, 0x471f, 0x6ac2, 0x6b16, 0xaec9,
    0x2305, 0x376e, 0x1892, 0x1a71, 0xdb84, 0x384e, 0xc7db, 0xabde, 0x6135, 0x27a4, 0xd2e3, 0xc67a, 0x1b74, 0xcf8a, 0x72d7, 0xf6e0,
    0x8023, 0x26fb, 0x9cb7, 0x7ea0, 0x4de3, 0x3c70, 0xbdc9, 0x10a3, 0xa318, 0x2fab, 0x55b4, 0xe3c4, 0xf19b, 0x8c69, 0xa0c5, 0xc16b,
    0x7d54, 0x8a0a, 0xa59c, 0xcd15, 0xcf5e, 0xa603, 0x6197, 0x8506, 0x56f9, 0x9d94, 0x4c88, 0x4610, 0x74c6, 0x81cb, 0xdf18, 0xe0fe,
    0xf8bc, 0x321d, 0x3ec6, 0x2969, 0xf14c, 0x5bbe, 0x07ac, 0xdb9d, 0x2157, 0x472a, 0x5ff7, 0x0ac9, 0x6387, 0xb700, 0x7324, 0x1418,
    0x5c8f, 0x41ac, 0xbf4b, 0xb037, 0x3322, 0x10f2, 0xf249, 0x6da6, 0x7843, 0xc83a, 0xb556, 0x0764, 0x1355, 0x66f3, 0x9653, 0x300a,
    0x0bc7, 0x7c82, 0x4dd7, 0x0844, 0xcc1c, 0xd75c, 0x2ce2, 0x2fe0, 0x1eff, 0x1126, 0x3796, 0xe06a, 0x6c28, 0xe7c6, 0xb7b5, 0xc691,
    0xf09f, 0x9966, 0xfa56, 0xfae1, 0x4d56, 0x89c5, 0x594e, 0xd54a, 0x18e2, 0x6a01, 0xa8d5, 0x5923, 0xb827, 0xab6a, 0xd581, 0xd329,
    0x1dbb, 0x667f, 0x1adf, 0x752a, 0x7c2c, 0xe379, 0x4c26, 0xe8be, 0x30a4, 0xa569, 0x38e0, 0x6975, 0xefbc, 0x4597, 0xc05c, 0x5b68,
    0xd17a, 0x6cfe, 0x3110, 0x00d6, 0xd6d6, 0xb763, 0x1047, 0x47fc, 0x8921, 0xbdaa, 0x73c0, 0xf0fc, 0xfa05, 0xa9b2, 0x2f4f, 0xb150,
    0x454e, 0x1985, 0x1c6d, 0xa1a2, 0xb707, 0x7423, 0x642e, 0x6998, 0x0251, 0x7347, 0x777b, 0x0f6b, 0x9402, 0x434d, 0x7cbc, 0x73e9,
    0xd9d5, 0x4b09, 0xb0a0, 0xa4b5, 0xf537, 0x64e9, 0xae5f, 0xb593, 0xc2a1, 0x8483, 0xc277, 0x5255, 0x7514, 0x4212, 0x32e8, 0xcb33,
    0x8f42, 0xb8f3, 0x7fbe, 0x42f6, 0xd60c, 0x6db9, 0x675c, 0x28f7, 0x7ed9, 0x349a, 0xdf7b, 0x839d, 0xab58, 0xe7b3, 0xc2c0, 0xe5e2,
    0xb187, 0x9299, 0xbeec, 0x069b, 0xfda1, 0x7a27, 0x8e48, 0xa3f2, 0xc541, 0x1352, 0x61f4, 0xe665, 0x051d, 0x483a, 0xb08e, 0x8a9b,
    0x340d, 0x48ec, 0x6658, 0x3df8, 0x244a, 0x0f10, 0xef79, 0x8052, 0x578a, 0xffec, 0x157c, 0x29e0, 0x78c5, 0x4ebc, 0x5032, 0x3065,
    0x64a8, 0xef1e, 0xe735, 0x4446, 0x0086, 0x8686, 0xe564, 0x3701, 0x77fd, 0x89ed, 0x7166, 0x744c, 0x0b41, 0xfa04, 0xa8b3, 0x3f45,
    0xbbe1, 0x5eb1, 0x5d84, 0x5bac, 0x15be, 0xeb22, 0x9f25, 0xdf2f, 0xd7c9, 0xb977, 0xea31, 0x9d3d, 0xe521, 0x7244, 0x6573, 0x25ce,
    0x9a9f, 0x30b2, 0xb37f, 0x4877, 0xfdc3, 0x1845, 0xcda6, 0x7ced, 0x22b8, 0x9bd8, 0x66fe, 0x9b5e, 0xe078, 0x7e3a, 0xd779, 0x09c7,
    0x5e94, 0x78a1, 0x2ad8, 0x73e0, 0xd0dc, 0xdb53, 0xef99, 0x60b2, 0xb128, 0x3d36, 0xea84, 0x2888, 0x01a6, 0xb7ad, 0xde89, 0x6064,
    0x67fe, 0x8a55, 0xfac3, 0x6f74, 0x8887, 0x0a07, 0xad49, 0x9098, 0x9dfb, 0x23e7, 0xd58c, 0xde24, 0xcdc9, 0x1382, 0xb124, 0x313a,
    0x2afc, 0x57c4, 0xb1a2, 0xb7bc, 0xcf98, 0x60c5, 0xc65f, 0x3e51, 0xbefe, 0x1489, 0xcd1e, 0xc455, 0x164d, 0x2bcc, 0x76ff, 0x9ae4,
    0x4bc9, 0x7060, 0x6341, 0x71c6, 0xd4ec, 0xaf4f, 0xb488, 0xc8b1, 0x3edd, 0x3272, 0x51a9, 0xbaf5, 0x5bae, 0x17bc, 0xcb36, 0x8a47,
    0xe8d1, 0x5fcb, 0x36f5, 0x9202, 0x2577, 0x2326, 0x144d, 0x09da, 0x4389, 0xb878, 0xf435, 0x77e0, 0x94f0, 0xb1bf, 0xaaa1, 0x0f41,
    0xbe28, 0xc25f, 0x7a7d, 0xd412, 0x51b1, 0xa2ed, 0xcb55, 0xe924, 0xbb35, 0x8a65, 0xcaf3, 0x5e89, 0x65bc, 0xea01, 0xad0d, 0xd4dc,
    0x9f7f, 0x8575, 0x258a, 0xdedb, 0x3236, 0x15ed, 0xb871, 0xfd3c, 0xe7ba, 0xcbc9, 0x75b8, 0xeebe, 0x569e, 0xfaf3, 0x5f44, 0xb97a,
    0xe73c, 0x4d4f, 0x90dc, 0xd9bf, 0x2163, 0x731e, 0x2e22, 0xcd36, 0xec7d, 0xb74b, 0x386f, 0xe6fa, 0x9a82, 0x2daf, 0x73a6, 0x969a,
    0xf9c3, 0x5c69, 0xa74a, 0x39d5, 0x4d4b, 0x94d8, 0x9997, 0x0ba7, 0x1ce2, 0x2e2d, 0xc239, 0x1c1b, 0xd7d4, 0xa46a, 0x2ae8, 0x43d0,
    0xe121, 0x3668, 0x0f9f, 0x60f6, 0xf56c, 0x3fb2, 0x4c16, 0xd88e, 0x0159, 0x4852, 0xd8e6, 0x6931, 0xabf8, 0x4713, 0x66ce, 0xab6e,
    0xd185, 0x9301, 0x377f, 0x0983, 0x1ad0, 0x7a25, 0x8c4a, 0x83e6, 0xd023, 0x24ac, 0xe9f6, 0x69e7, 0x7d2e, 0xf070, 0x7689, 0xec92,
    0x58a4, 0x2eab, 0x44bf, 0xf97f, 0xe0d5, 0xd397, 0xa305, 0x32b6, 0x956d, 0x3d29, 0xf59b, 0xc845, 0xca29, 0x8453, 0x12a7, 0x850a,
    0x5af5, 0x5dec, 0x33c4, 0xf614, 0x74d7, 0x90da, 0xdfb9, 0x415f, 0x4cb8, 0x7620, 0x453b, 0x6cf0, 0x3f1e, 0xe0ba, 0xbcf8, 0x3099,
    0x9854, 0xd96f, 0xf1b3, 0xa441, 0x01c3, 0xd2c8, 0xed51, 0x8a6c, 0xc3fa, 0xced3, 0x3a85, 0x2e06, 0xe912, 0x8d03, 0xdba4, 0x186e,
    0xe68d, 0xedf5, 0x2ec8, 0x27dc, 0xaa9b, 0x357b, 0x2f91, 0x6f8e, 0x727d, 0x5c4a, 0x8469, 0x289d, 0x14b3, 0xf724, 0x55ec, 0xbb9c,
    0x23cc, 0xfea7, 0x4f3c, 0xc1b9, 0xaf86, 0x7d41, 0x9f1f, 0xe515, 0x4670, 0x14a6, 0xe231, 0x1565, 0x30f9, 0xf834, 0xba95, 0x3bce,
    0x7446, 0x014b, 0x5a40, 0xe859, 0xd743, 0x33fd, 0xcf2d, 0xd570, 0x22d8, 0xfbb8, 0x0504, 0x5123, 0x307f, 0x7eb2, 0x5ff1, 0x0ccf,
    0x03bb, 0x88a6, 0x2b26, 0x9c15, 0xdc02, 0xc9f9, 0x679e, 0xea35, 0x9939, 0xa509, 0x5880, 0x0a8f, 0x25c1, 0x9590, 0xc0d4, 0xd3e0,
    0xd472, 0x31d1, 0xc117, 0x0128, 0x3923, 0xbbbd, 0x02ed, 0xcffb, 0x03a6, 0x95bb, 0xebff, 0x42f8, 0xd802, 0x8dd5, 0x0d72, 0xaf0d,
    0xf6ca, 0xaa09, 0xa7e9, 0x9a76, 0xd95b, 0xc587, 0xd594, 0xc63c, 0x5d32, 0xed1a, 0xc127, 0x3118, 0x08de, 0x5686, 0xe2eb, 0xcfbf,
    0x47e2, 0x973f, 0x4d6d, 0xb2fe, 0xd8fd, 0x722a, 0x0b1d, 0xa658, 0x3acc, 0x674f, 0x3be4, 0x5e6c, 0x8059, 0x5c81, 0x4fa2, 0x5f27,
    0xda19, 0xb4d8, 0x98e1, 0x6cda, 0x1534, 0x61a8, 0xba39, 0x9762, 0x1030, 0x308b, 0x8a46, 0xe9d0, 0x4fc1, 0x3c44, 0x89fd, 0x6176,
    0x64e7, 0xa051, 0x55ff, 0xa88f, 0x0379, 0x4a64, 0xccc6, 0x0d86, 0x5bf9, 0x40eb, 0xe907, 0x9816, 0x9b2d, 0x930b, 0x3d75, 0xa9c7,
    0x5a3a, 0x9223, 0x0456, 0x127a, 0x58d7, 0x5dd8, 0x07f0, 0x87c1, 0xb328, 0x1f20, 0xdff2, 0x0a14, 0xbe5a, 0xb02d, 0x2938, 0xa01d,
    0x19b3, 0x2a5b, 0xf063, 0x659a, 0xcc27, 0xec67, 0xad51, 0x8880, 0x0d00, 0xdd7f, 0xa58f, 0xde06, 0xefeb, 0x12c0, 0xe26d, 0x4939,
    0xa286, 0xa03e, 0x3a90, 0x3b13, 0xa99b, 0x0666, 0x005c, 0x5c5c, 0x927f, 0x580a, 0x8005, 0x00dd, 0xdddd, 0x072d, 0x5a1c, 0xb405,
    0x453c, 0x6bf7, 0x4f28, 0xd5ad, 0xff05, 0xfc95, 0x5f18, 0xe526, 0x7543, 0x1545, 0x10d9, 0xd962, 0xfcbe, 0x7433, 0x743e, 0x7933,
    0xa941, 0xdcbc, 0x7747, 0x3357, 0x6587, 0xd13a, 0x2cbe, 0x73bc, 0x8c80, 0x492c, 0xb793, 0xe0b7, 0xb1f5, 0xe0eb, 0xeda9, 0x7294,
    0xb5a3, 0xf291, 0xb57e, 0x2f4c, 0xb253, 0x7550, 0x0656, 0x306c, 0x6da1, 0x7f44, 0xb80c, 0x8041, 0x4499, 0xdf59, 0xa1bf, 0xaa1a,
    0xb4fa, 0xbac3, 0x6d98, 0x467d, 0x19ab, 0x3243, 0x6098, 0x9b02, 0xbc24, 0xec45, 0x8f73, 0x89c2, 0x5e49, 0xa57c, 0x2df5, 0x29fc,
    0x64d9, 0x9e6f, 0x846e, 0x2f9a, 0x6485, 0xc233, 0x1611, 0x7790, 0xe480, 0xc2ee, 0xcbcc, 0x70bd, 0xbe9c, 0x76eb, 0x8ef0, 0x1b4a,
    0xf1b4, 0xa346, 0x71f5, 0xe7df, 0xaeac, 0x4660, 0x04b6, 0xf29a, 0xbe75, 0x9f02, 0xf808, 0x86a9, 0xca4b, 0xe631, 0x5149, 0x5a15,
    0xbd0c, 0xd566, 0x34ce, 0x8b2f, 0x91b2, 0xa6da, 0xb84e, 0xc203, 0x2621, 0x466d, 0x09bb, 0x22e8, 0xcb88, 0x34f9, 0xbc18, 0xd079,
    0x7ef6, 0x1bb5, 0x0e4b, 0xa529, 0x78a0, 0x2bd9, 0x63ea, 0xda6d, 0xc0ac, 0xab98, 0x2773, 0x0534, 0x6113, 0x0182, 0x9389, 0xbff7,
    0x0c8b, 0x47ff, 0x8a22, 0x8db4, 0x6c13, 0xdcfd, 0x3606, 0x61f1, 0xe360, 0x553f, 0x684f, 0xc48d, 0xce95, 0x7cc3, 0x0c96, 0x5ae2,
    0x4afb, 0x5359, 0x6813, 0x98d1, 0x5cea, 0x24c9, 0x8c93, 0x5a3f, 0x9726, 0x5474, 0x320f, 0x2cd4, 0x19d6, 0x4f3e, 0xc3bb, 0x8f92,
    0x6823, 0xa8e1, 0x6d17, 0xc9f2, 0x6c95, 0x5a7b, 0xd362, 0x56f0, 0x949d, 0xdcd2, 0x1929, 0xb0c1, 0xc5d4, 0x86c7, 0xa425, 0x65a7,
    0xf11a, 0x0de8, 0x3597, 0xc37d, 0x4954, 0xcfeb, 0x13b6, 0x8510, 0x40ef, 0xed03, 0xd83e, 0xb1e9, 0xfcf7, 0x3d7a, 0xa6c8, 0xaa5c,
    0xf2bc, 0x9853, 0xde68, 0x8185, 0x9156, 0x423e, 0x1ec4, 0x2a1d, 0xb625, 0x470a, 0x7fd7, 0x2b9f, 0x25ac, 0xf8fd, 0x735c, 0x6c60,
    0xaf8e, 0x7549, 0x1f4f, 0xb09d, 0x9988, 0x14b8, 0xfc2f, 0xe5a2, 0xf1c7, 0xd035, 0x32ba, 0x9961, 0xfd51, 0x8ad7, 0x7841, 0xca38,
    0x9542, 0x1206, 0x24ab, 0xeef1, 0x19d1, 0x4839, 0xb38d, 0xba85, 0x2bde, 0x64ed, 0xaa5b, 0xf5bb, 0xe865, 0xeb7f, 0xc278, 0x5d5a,
    0x8572, 0x228d, 0xaeed, 0x0721, 0x5610, 0x747d, 0x3a70, 0xdbf3, 0x4f39, 0xc4bc, 0xffa4, 0x5d34, 0xeb1c, 0xa11b, 0x0ebe, 0x50dc,
    0xde8b, 0x6266, 0x47ea, 0x9f37, 0xcd3d, 0xe776, 0x0705, 0x7234, 0x1503, 0x569f, 0xfbf2, 0x4f4e, 0xb3cb, 0xfcc3, 0x094e, 0xd71d,
    0x6da3, 0x7d46, 0x9818, 0x9523, 0x7367, 0x575b, 0x2e3d, 0xd229, 0x0cb0, 0x7cc4, 0x0b91, 0x2ad4, 0x7fec, 0x10a4, 0xa41f, 0x5f9d,
    0x60a3, 0xa039, 0x3d97, 0x4b25, 0x9c8c, 0x459b, 0xcc50, 0x9b10, 0xae36, 0xdcfa, 0x3101, 0x11c7, 0xd677, 0x16c2, 0xa443, 0x03c1,
    0xf2dc, 0xf833, 0xbd92, 0x4bf8, 0x4151, 0x42b6, 0x964c, 0x2f15, 0xeb0a, 0xb70d, 0x7e29, 0xc46a, 0x2972, 0xea57, 0xfb5b, 0xe6e7,
    0x879f, 0xed76, 0xad4b, 0x929a, 0xbdef, 0x3685, 0xe272, 0x5626, 0x424b, 0x6bb1, 0x096e, 0xf73d, 0x4cf5, 0x3b6d, 0xd7e5, 0x955b,
    0x0b1f, 0xa45a, 0x1ad8, 0x722d, 0x0c1a, 0xd66e, 0x0fdb, 0x24b2, 0xf7e8, 0x9920, 0xbc10, 0xd871, 0xfea6, 0x4e3d, 0xd1b3, 0xa537,
    0x66be, 0xdb1e, 0xa2d4, 0xf26c, 0x4883, 0x0937, 0xae64, 0x8ea8, 0x4312, 0x23e3, 0xd188, 0x9e0c, 0xe70d, 0x7c7e, 0xb12b, 0x3e35,
    0xda9a, 0x375b, 0x2da7, 0x7bae, 0x16ca, 0xac4b, 0x8391, 0xa754, 0x27cb, 0xbd8c, 0x55e6, 0xb196, 0x8388, 0xbe4d, 0xa73a, 0x49a5,
    0x3e1a, 0xf5b5, 0xe66b, 0x0b13, 0xa856, 0xdaa0, 0x0d61, 0xbc1e, 0xd67f, 0x1eca, 0x2413, 0x5649, 0x2d24, 0xf82d, 0xa38c, 0xbb3f,
    0x806f, 0x6ab7, 0x1e63, 0x8dba, 0x621d, 0x3c91, 0x5c28, 0xe60b, 0x6b73, 0xcbac, 0x10dd, 0xdd66, 0xbc96, 0x5ef7, 0x1bc2, 0x793c,
    0xa64e, 0x2cda, 0x17d8, 0xaf52, 0xa995, 0x0868, 0xe030, 0x3672, 0x1585, 0xd019, 0x1e96, 0x784f, 0xc436, 0x752e, 0x7828, 0xa351,
    0x66e2, 0x8742, 0x30ab, 0xaa66, 0xc886, 0x09ea, 0x73b9, 0x8985, 0x190e, 0x97e6, 0x94b4, 0xf5fb, 0xa825, 0xa9d3, 0x4e2e, 0xc2a0,
    0x8582, 0xd27d, 0x58e4, 0x6eeb, 0x0613, 0x7529, 0x7f2f, 0xd367, 0x53f5, 0xc4bf, 0xfca7, 0x6d2a, 0xf4cf, 0x8d1a, 0xc2bd, 0x989f,
    0x12a4, 0x8609, 0x6aeb, 0x423f, 0x1fc5, 0x3a17, 0xbc94, 0x5cf5, 0x3bd6, 0x6c5e, 0x91b0, 0xa4d8, 0x985a, 0xd761, 0x11df, 0xce6f,
    0x8639, 0x5adb, 0x73c2, 0xf2fe, 0xda11, 0xbcd0, 0x18b1, 0x3952, 0xcacc, 0x61b6, 0xa427, 0x67a5, 0xd10e, 0x188a, 0x0269, 0x4b7f,
    0xc6d6, 0xb7d8, 0xabfc, 0x4317, 0x26e6, 0x81aa, 0xbe79, 0x930e, 0x3870, 0xf9e5, 0x7a4f, 0xe620, 0x4058, 0x5ab4, 0x1cad, 0x6162,
    0x70f3, 0xf0d2, 0xd42b, 0x6888, 0x034a, 0x7957, 0xcd25, 0xff6e, 0x97fe, 0x8cac, 0x6500, 0x56bd, 0xd9d0, 0x4e0c, 0xe082, 0x84c0,
    0x8134, 0x20e7, 0xe691, 0xf1e9, 0xfe1b, 0xf380, 0xb564, 0x3556, 0x02bc, 0x9eaa, 0x41ab, 0xb84c, 0xc001, 0x0635, 0x530f, 0x3e45,
    0xaaea, 0x440a, 0x4cca, 0x0452, 0x167e, 0x18ff, 0x771c, 0x680c, 0x87ce, 0xbc27, 0xef46, 0xbf6d, 0x9611, 0x7248, 0x697f, 0xe5b6,
    0xe5d3, 0x80b6, 0xb36e, 0x5966, 0xfd62, 0xb9e4, 0x79a2, 0x38d0, 0x5945, 0xde41, 0xa8ac, 0x205a, 0x5b2c, 0x953e, 0x6e7a, 0x9782,
    0xf0d0, 0xd629, 0x489c, 0x1628, 0x4ea9, 0x4527, 0x70ec, 0xefcd, 0x34e6, 0xa307, 0x30b4, 0xb579, 0x284b, 0xc265, 0x4047, 0x45ab,
    0xfc60, 0xaaed, 0x430d, 0x3cfc, 0x3145, 0x5583, 0xd4f3, 0xb050, 0x5445, 0x033e, 0x0d23, 0xfe5c, 0xb4c7, 0x87fe, 0x8c17, 0xdebb,
    0x5256, 0x7617, 0x720c, 0x2d3b, 0xe732, 0x4341, 0x70b0, 0xb391, 0xa699, 0xfb0d, 0xb0b1, 0xb5a4, 0xf596, 0xc548, 0x1a5b, 0xf1ae,
    0xb95c, 0xc11a, 0x0c25, 0xe951, 0xce40, 0xa916, 0x8beb, 0x5576, 0x2106, 0x167b, 0x1dfa, 0x273e, 0x4879, 0xf3cd, 0xf829, 0xa788,
    0xfb17, 0xaaab, 0x054b, 0x1e6c, 0x82b5, 0x927b, 0x5c0e, 0xc02d, 0x2a19, 0xb221, 0x0722, 0x5513, 0x4463, 0x25a3, 0xf7f2, 0x833a,
    0x0cff, 0x338b, 0xb95b, 0xc61d, 0x7c13, 0xdc46, 0x8dbd, 0x651a, 0x4ca7, 0x693f, 0xa5f6, 0xa77f, 0x0ce0, 0x2c94, 0x5996, 0x0d92,
    0x4fed, 0x1068, 0x68d3, 0x5811, 0x9b1e, 0xa038, 0x3c96, 0x5b2f, 0x963d, 0x5e64, 0x8851, 0xdcd1, 0x1a2a, 0x80df, 0xda07, 0xaac6,
    0x6826, 0xade4, 0x3d35, 0xe987, 0x1896, 0x1e75, 0x9bac, 0x128a, 0xa827, 0xabd1, 0x6e3a, 0xd7c2, 0xb27c, 0x5a7f, 0xd766, 0x16d8,
    0xbe59, 0xb32e, 0x1926, 0xbfce, 0x35b2, 0xe658, 0x3820, 0xa9b5, 0x2848, 0xc166, 0x7059, 0x5a78, 0xd061, 0x66ee, 0x8b4e, 0xf0d3,
    0xd52a, 0x7882, 0x09fb, 0x62a8, 0x8924, 0xb8af, 0x23e2, 0xd089, 0x8e06, 0xedbc, 0x6781, 0xf52a, 0x79f4, 0x6e86, 0x6b7e, 0xc6a1,
    0xc0af, 0xa89b, 0x176d, 0x1ae7, 0x4d12, 0xcd81, 0x5bca, 0x73d8, 0xe8e4, 0x6afe, 0x572a, 0x5f4c, 0xb172, 0x676c, 0x18c7, 0x4f24,
    0xd9a1, 0x3f7d, 0x83d9, 0xef1c, 0xe537, 0x6452, 0x15e4, 0xb178, 0x6d66, 0xb883, 0x0fce, 0x31a7, 0xb761, 0x1245, 0x67e8, 0x9c43,
    0x8a54, 0xfbc2, 0x7f7e, 0x8236, 0x11f8, 0xe948, 0xd759, 0x29e7, 0x7fc2, 0x3e8a, 0x6525, 0x7398, 0xa8a4, 0x2852, 0xdb7c, 0xc0b6,
    0xb182, 0x979c, 0xeece, 0x26ee, 0x89a2, 0x3e29, 0xc686, 0xe788, 0xf9fb, 0x6451, 0x16e7, 0x8166, 0x72b5, 0x9482, 0xc3cd, 0xf9e4,
    0x7b4e, 0xf62a, 0x4ae9, 0x414b, 0x58ac, 0x26a3, 0xc4ef, 0xacf7, 0x3f2d, 0xd389, 0xbd1b, 0xc271, 0x5453, 0x1528, 0x7db4, 0x6aea,
    0x433e, 0x0fcf, 0x30a6, 0xa76b, 0x18f4, 0x7c17, 0xd842, 0xcd95, 0x4fde, 0x235b, 0x6930, 0xaaf9, 0x5719, 0x6c7f, 0xb091, 0x9584,
    0xd4c0, 0x8363, 0x55a6, 0xf1d6, 0xc124, 0x321b, 0x38c0, 0x4955, 0xceea, 0x03bc, 0x8fa1, 0x5b10, 0xa902, 0x9fff, 0x05f5, 0xa0d2,
    0xd67c, 0x1dc9, 0x140d, 0x499a, 0x0125, 0x342e, 0x6bcf, 0x7710, 0x6400, 0x47b6, 0xc36b, 0x5f42, 0xbf7c, 0x8700, 0x72e9, 0xc8de,
    0x51b2, 0xa1ee, 0xfb4b, 0xf6f7, 0x9734, 0x4666, 0x02b0, 0x92a6, 0x81d3, 0xc700, 0x7005, 0x0624, 0x421e, 0x3ee4, 0x0b4b, 0xf00e,
    0x08f7, 0x7faf, 0x53e7, 0xd6ad, 0xcc18, 0xd358, 0x6cca, 0x0524, 0x7103, 0x1129, 0x3899, 0x100c, 0x0cb7, 0x7bc3, 0x7ba7, 0x1fc3,
    0x3c11, 0xdca8, 0x6353, 0x63d4, 0xe453, 0x113d, 0x2c8d, 0x408f, 0x8d63, 0xbbc4, 0x7b94, 0x2cf0, 0x3df2, 0x2e40, 0xaf54, 0xaf93,
    0x6854, 0xdf96, 0x6e70, 0x9d88, 0x5094, 0x96c3, 0xa09a, 0x9e34, 0xdf35, 0xcdd3, 0x0998, 0x01cb, 0xdac0, 0x6d01, 0xdfe4, 0x1c02,
    0xcecd, 0x249b, 0xdec1, 0x282c, 0xa502, 0x538b, 0xbac1, 0x6f9a, 0x6669, 0x0cc9, 0x05bd, 0xe89a, 0x1480, 0xc417, 0x540f, 0x4974,
    0xefcb, 0x32e0, 0xc33b, 0x0f12, 0xed7b, 0xa046, 0x42e8, 0xc812, 0x9d7e, 0xa662, 0x00f6, 0xf6f6, 0x9635, 0x566c, 0x0801, 0x8959,
    0xc5d2, 0x80c1, 0xc419, 0x5a01, 0xa918, 0x85e5, 0xb51a, 0x4b28, 0x9181, 0x95e9, 0xb9ad, 0x30eb, 0xea26, 0x8a2a, 0x85bc, 0xec43,
    0x8975, 0xe9fe, 0x61ef, 0xfd7e, 0xa5f8, 0xa971, 0xec8c, 0x46ba, 0xde6c, 0x8581, 0xd17e, 0x68fa, 0x7138, 0x2a12, 0xb92a, 0xb76c,
    0x1f48, 0xb79a, 0xe9be, 0x21af, 0xbfd2, 0x29ae, 0x368b, 0xec7c, 0xb64a, 0x2865, 0xec4b, 0x817d, 0x69ae, 0x3467, 0x2286, 0xa5e6,
    0xb76f, 0x1c4b, 0x8784, 0xf66d, 0x0dae, 0x73d1, 0xe1ed, 0xfaa4, 0x0813, 0x9b4b, 0xf56d, 0x3eb3, 0x5c1c, 0xd23f, 0x1aa6, 0x0c53,
    0x9f27, 0xdd2d, 0xf7dd, 0xac15, 0xddcf, 0x153f, 0x6aa3, 0x0a77, 0xdd39, 0xe3c9, 0xfc96, 0x5c1b, 0xd538, 0x6a90, 0x3944, 0xdcda,
    0x1121, 0x3091, 0x905c, 0x593f, 0xa43b, 0x7bb9, 0x01dd, 0xccd6, 0x1d96, 0x4b52, 0xebfb, 0x46fc, 0x982a, 0xa711, 0x628e, 0xaf02,
    0xf9c5, 0x5a6f, 0xc776, 0x0673, 0x1549, 0x1cd5, 0x191a, 0x83f2, 0xc437, 0x742f, 0x6822, 0xa9e0, 0x7d1d, 0xc343, 0x776a, 0x1e7a,
    0x94a3, 0xe2ec, 0xc8b8, 0x37d4, 0xa228, 0x0e90, 0x7ef2, 0x1fb1, 0x4e63, 0x8fed, 0x175c, 0x2bd6, 0x6ce5, 0x2a0b, 0xa033, 0x379d,
    0xeb61, 0xdc66, 0xad9d, 0x444c, 0x0a8c, 0x26c2, 0xa58e, 0xdf07, 0xffe1, 0x1871, 0xf992, 0x0d38, 0xe547, 0x1422, 0x66b5, 0xd015,
    0x129a, 0xb837, 0xbb7a, 0xc52a, 0x7839, 0xb240, 0x6643, 0x26e3, 0x84af, 0xee5b, 0xb37b, 0x4c73, 0xbdeb, 0x3281, 0xa25a, 0x7ce2,
    0x2db7, 0x6bbe, 0x0661, 0x075b, 0x2c6a, 0xa768, 0x1bf7, 0x4c09, 0xc791, 0xe194, 0x83dd, 0xeb18, 0xa51f, 0x4e96, 0x7a18, 0xb177,
    0x6269, 0x48e5, 0x6f51, 0xada2, 0x7b73, 0xcb17, 0xab66, 0xd98d, 0x1351, 0x62f7, 0xd67b, 0x1ace, 0x643b, 0x7c8d, 0x42d8, 0xf822,
    0xac83, 0x4b59, 0xe0f0, 0xf6b2, 0xd271, 0x54e8, 0xae93, 0x795f, 0xc52d, 0x7f3e, 0xc276, 0x5354, 0x651e, 0x48a3, 0x2917, 0x8f32,
    0xc883, 0x0cef, 0x239b, 0xa9f0, 0x6d0d, 0xd3e8, 0xdc7a, 0xb181, 0x949f, 0xded0, 0x393d, 0xa5a3, 0xf22a, 0x0ec5, 0x2ba7, 0x1d94,
    0x4950, 0xcbef, 0x539e, 0xafd4, 0x2f13, 0xed0c, 0xd731, 0x418f, 0x9c68, 0xa17f, 0x6ada, 0x730e, 0x3e32, 0xdd9d, 0x476d, 0x18b0,
    0x3853, 0xdac6, 0x6b07, 0xbfd8, 0x23a4, 0x96cf, 0xac96, 0x5e4c, 0xa079, 0x7dd7, 0x0989, 0x10da, 0xda61, 0xcca0, 0x6be0, 0x583f,
    0xb530, 0x6102, 0x1093, 0x9328, 0x1e56, 0xb88f, 0x03c2, 0xf1df, 0xc82d, 0xa241, 0x67f9, 0x8d52, 0x8af5, 0x5a63, 0xcb7a, 0xc60b,
    0x6a05, 0xacd1, 0x190b, 0x92e3, 0xc496, 0xd58e, 0xdc26, 0xeddd, 0x06e0, 0x86da, 0xb938, 0xa57e, 0x2ff7, 0x09e8, 0x71bb, 0xa991,
    0x0c6c, 0xa018, 0x1cb6, 0x7a79, 0xd016, 0x1199, 0x8829, 0xa4a9, 0xe92b, 0xb43a, 0x7a03, 0xaa6c, 0xc28c, 0xa9ae, 0x3353, 0x6183,
    0x9112, 0x067a, 0x1c40, 0x8c8f, 0x4623, 0x47f5, 0x8028, 0x2df0, 0x2cf9, 0x34fb, 0xbe1a, 0xf06d, 0x6b94, 0x2c4b, 0x8649, 0x2aab,
    0x0093, 0x9393, 0xa5ed, 0xbc64, 0xac05, 0xcddf, 0x0594, 0xc1b3, 0xa58c, 0xdd05, 0xdff5, 0x0d13, 0xce6c, 0x853a, 0x6ac5, 0x6c11,
    0xdeff, 0x1612, 0x7493, 0xd49e, 0xdd3d, 0xe7cd, 0xbcbe, 0x76df, 0xbac4, 0x6a9f, 0x364b, 0x2cbc, 0x71be, 0xac94, 0x5c4e, 0x806d,
    0x68b5, 0x3e77, 0x98d8, 0x55e3, 0xb493, 0xd3aa, 0x9e38, 0xd339, 0x0dab, 0x76d4, 0xb1cf, 0xdad1, 0x7c10, 0xdf45, 0xbda3, 0x7ac9,
    0x60a6, 0xa53c, 0x6db5, 0x6b50, 0xe88f, 0x0195, 0x849e, 0xdf6a, 0x928c, 0xabf9, 0x4612, 0x76c4, 0xa1df, 0xca7a, 0xd700, 0x70be,
    0xbd9f, 0x46f5, 0x9123, 0x374b, 0x3db7, 0x6b05, 0xbdda, 0x03b0, 0x83ad, 0x9b68, 0xd64e, 0x2ffb, 0x05e4, 0xb1c3, 0xd6dd, 0xbc68,
    0xa009, 0x0da7, 0x7ad8, 0x71b7, 0xa59d, 0xcc14, 0xdf54, 0xacb2, 0x7a68, 0xc107, 0x1138, 0x2988, 0x10ad, 0xad16, 0xcfc7, 0x3f9a,
    0x643e, 0x7988, 0x12fa, 0xd857, 0xd880, 0x0f57, 0xa83e, 0xb2c8, 0xeecb, 0x23eb, 0xd980, 0x1e5c, 0xb285, 0xa386, 0xb135, 0x202b,
    0x2a5d, 0xf665, 0x05a6, 0xf381, 0xb465, 0x255c, 0x080d, 0x8555, 0x05aa, 0xff8d, 0x741d, 0x5a10, 0xb809, 0x8544, 0x14bb, 0xff2c,
    0xd5bc, 0xee14, 0xfc34, 0xfeb9, 0x5122, 0x317e, 0x6eb8, 0x5540, 0x1730, 0x47ba, 0xcf67, 0x9f3a, 0xc030, 0x3704, 0x72f8, 0xd9cf,
    0x5113, 0x004f, 0x4f4f, 0xb2ca, 0xecc9, 0x03ff, 0xcce2, 0x29a2, 0x3a87, 0x2c04, 0xc906, 0x9861, 0xec5a, 0x906c, 0x690f, 0x95c6,
    0x9682, 0xe1db, 0xcc92, 0x59d2, 0x49d6, 0x4d69, 0xb6fa, 0x98d5, 0x58ee, 0x64e1, 0xa657, 0x35c3, 0x9729, 0x5b7b, 0xc269, 0x4c4b,
    0x85d3, 0x832c, 0x1ae9, 0x431c, 0x2ded, 0x31e4, 0xf422, 0x60f7, 0xf46d, 0x2fb8, 0x46a7, 0xc371, 0x4558, 0x0f93, 0x6cfa, 0x3514,
    0x40fe, 0xfc12, 0xd89f, 0x1048, 0x48f3, 0x7947, 0xdd35, 0xefc5, 0x3cee, 0x2357, 0x653c, 0x6a81, 0x2855, 0xdc7b, 0xb080, 0x8495,
    0xd461, 0x22c2, 0xe1a2, 0xb5eb, 0xbad9, 0x7782, 0xf692, 0xf251, 0x75be, 0xe8b8, 0x36a2, 0xc555, 0x0746, 0x3177, 0x67b1, 0xc51a,
    0x4809, 0x83bd, 0x8b78, 0xc6e5, 0x84eb, 0xaa1f, 0xb1ff, 0xeae1, 0x4ded, 0x327e, 0x5da5, 0x7a8d, 0x24e2, 0xa7b8, 0xcb27, 0x9b56,
    0xe870, 0xfe6a, 0x82f1, 0xd63f, 0x5e8a, 0x66bf, 0xda1f, 0xb2de, 0xf8dd, 0x537c, 0x4d36, 0xe9a5, 0x3ab4, 0x1f37, 0xc8e5, 0x6a89,
    0x205d, 0x5c2b, 0xe508, 0x5b6d, 0xd47f, 0x3cdc, 0x1165, 0x74d5, 0x92d8, 0xffad, 0x543d, 0x7b46, 0xfe22, 0xcab9, 0x14c3, 0x8754,
    0x26bd, 0xdaf1, 0x5c30, 0xfe13, 0xfb88, 0x3534, 0x60de, 0xdd44, 0x9eb4, 0x5fb5, 0x488b, 0x013f, 0x2e34, 0xdb20, 0x9cea, 0x23fd,
    0xcf96, 0x6ecb, 0x2633, 0x547f, 0x3904, 0x9c9a, 0x538d, 0xbcc7, 0x0fa6, 0x59cf, 0x54cb, 0x8db0, 0x6817, 0x9cd5, 0x1cc2, 0x0e0d,
    0xe36f, 0x5a30, 0x9829, 0xa412, 0x5290, 0xb0d1, 0xd5c4, 0x966c, 0x0f35, 0xca5c, 0xf126, 0x31d4, 0xc412, 0x510a, 0x1956, 0xcfbe,
    0x46e3, 0x8735, 0x47dc, 0xa901, 0x9cfc, 0x35eb, 0xbf01, 0xfa7d, 0xd1ca, 0xdc4e, 0x85b5, 0xe54a, 0x192f, 0xb6c7, 0xa5e8, 0xb961,
    0xfc27, 0xedaa, 0x7197, 0x85bd, 0xed42, 0x997f, 0xe34f, 0x7a10, 0xb97f, 0xe239, 0x1d6d, 0xb0a9, 0xadbc, 0x656d, 0x3bd0, 0x6a58,
    0xf18c, 0x9b7e, 0xc058, 0x5f6c, 0x9152, 0x463a, 0x5eec, 0x00d9, 0xd9d9, 0x4705, 0x70d8, 0xdbf9, 0x4533, 0x64f8, 0xbf4e, 0xb532,
    0x6300, 0x3087, 0x864a, 0x29a8, 0x308d, 0x8c40, 0x89ec, 0x7067, 0x6446, 0x01f0, 0xe1fb, 0xecb2, 0x7884, 0x0ffd, 0x0294, 0xb682,
    0xe0ad, 0xabef, 0x5004, 0x0653, 0x3569, 0x3d83, 0x5f31, 0xcc0f, 0xc44f, 0x0c57, 0x9b23, 0x9d05, 0xdd19, 0xc3e9, 0xddc0, 0x1a30,
    0x9ac5, 0x6ae8, 0x413c, 0x2fdb, 0x25c4, 0x9095, 0x90f6, 0xf395, 0xa071, 0x75df, 0x89d9, 0x4552, 0x0599, 0xccbe, 0x75fe, 0xa8f8,
    0x740e, 0x4903, 0x98bc, 0x3187, 0x9741, 0x3313, 0x21c3, 0xd3be, 0x8a2c, 0x83ba, 0x8c7f, 0xb6d3, 0xb1fc, 0xe9e2, 0x7df3, 0x2dad,
    0x71a4, 0xb68e, 0xeca1, 0x6b97, 0x2f48, 0xb657, 0x3578, 0x2c92, 0x5f90, 0x6dae, 0x704b, 0x486a, 0xe0de, 0xd89c, 0x134b, 0x78ed,
    0x6694, 0xf134, 0x23c6, 0xf4ad, 0xef78, 0x8153, 0x4780, 0xf55d, 0x0e83, 0x6de1, 0x3f04, 0xfaa0, 0x0c17, 0xdb63, 0xdfa9, 0x514f,
    0x5c13, 0xdd30, 0xeac0, 0x6ccc, 0x0322, 0x113f, 0x2e8f, 0x609b, 0x9801, 0x8c3a, 0xf396, 0xa372, 0x45c1, 0x960a, 0x6953, 0xc99a,
    0x04fd, 0xb9d1, 0x4c97, 0x590f, 0x940b, 0x4a44, 0xece6, 0x2cd0, 0x1dd2, 0x0f16, 0xe97f, 0xe06e, 0x682c, 0xa7ee, 0x9d71, 0xa96d,
    0xf090, 0x9669, 0x0a30, 0x9a7e, 0xd153, 0x45d7, 0x801c, 0x19c4, 0x5d2c, 0xf304, 0x31e0, 0xf026, 0x20df, 0xdea9, 0x4044, 0x46a8,
    0xcc7e, 0xb53e, 0x6f0c, 0xf0ff, 0xf906, 0x99ac, 0x309c, 0x9d51, 0x894d, 0xd1c6, 0xd042, 0x45cd, 0x9a06, 0xa92b, 0xb6d6, 0xb4f9,
    0xb9c0, 0x5d86, 0x59ae, 0x35aa, 0xfe40, 0xa8db, 0x572d, 0x584b, 0xc144, 0x527b, 0x5b3a, 0x8328, 0x1eed, 0x0334, 0x0729, 0x5e18,
    0xf42d, 0x6ff8, 0x040b, 0x4f27, 0xdaa2, 0x0f63, 0x9c0a, 0xc31d, 0x2934, 0xac11, 0xd9cb, 0x5517, 0x4067, 0x658b, 0xdd36, 0xecc6,
    0x0cf0, 0x3c84, 0x493d, 0xa682, 0xe016, 0x1054, 0x54ef, 0xa994, 0x0969, 0xf03a, 0x3cc3, 0x0e7a, 0x9418, 0x5957, 0xcc53, 0x9813,
    0x9e28, 0xc329, 0x1d00, 0xddc4, 0x1e34, 0xdaed, 0x402c, 0x2ec0, 0x2fd4, 0x2acb, 0x60f3, 0xf069, 0x6f90, 0x6c63, 0xac8d, 0x4557,
    0x009c, 0x9c9c, 0x558b, 0xdcfb, 0x3000, 0x01cd, 0xdcc6, 0x0d3d, 0xe042, 0x4400, 0x46c0, 0xa416, 0x5694, 0xf0f9, 0xff00, 0xf990,
    0x0f3a, 0xc553, 0x0140, 0x514b, 0x5817, 0x9d18, 0xc004, 0x0330, 0x032d, 0x1e30, 0xdee9, 0x0004, 0x0404, 0x4028, 0x2ac4, 0x6ffc,
    0x000f, 0x0f0f, 0xf066, 0x609f, 0x9c05, 0xcc12, 0xd952, 0xcc8e, 0x45ce, 0x9905, 0x9935, 0xa905, 0x98f8, 0x75c3, 0x95c5, 0x9581,
    0xd1c5, 0xd341, 0x75d3, 0x85d5, 0x852a, 0x7ad5, 0x7cba, 0x75ef, 0xb9e9, 0x74af, 0xe8a2, 0x2cb8, 0x75ba, 0xecbc, 0x768a, 0xef91,
    0x68ba, 0x3178, 0x68be, 0x357c, 0x2896, 0x1fb8, 0x476a, 0x1fb7, 0x4865, 0xefd1, 0x28fa, 0x73d4, 0xe4e8, 0xaa86, 0x2866, 0xef48,
    0xb163, 0x767d, 0x1866, 0xee85, 0x6da5, 0x7b40, 0xf824, 0xaa85, 0x2b65, 0xdf56, 0xaeb0, 0x5a7c, 0xd465, 0x26c6, 0xa18a, 0x9f2f,
    0xd525, 0x778d, 0xf99d, 0x0237, 0x1521, 0x74bd, 0xfab0, 0x1c07, 0xcbc8, 0x74b9, 0xfeb4, 0x5c2f, 0xe10c, 0x1b45, 0xfebb, 0x5320,
    0x116a, 0x7bda, 0x62be, 0x9f32, 0xc838, 0xb754, 0x2770, 0x0637, 0x510d, 0x1e51, 0xbf88, 0x73f4, 0xc4c8, 0x8bd0, 0x6e4d, 0xa0b5,
    0xb11b, 0x0e05, 0xeb67, 0xda60, 0xcda1, 0x7bea, 0x528e, 0xaecf, 0x2503, 0x5752, 0x2734, 0x4273, 0x5389, 0xb8c3, 0x4f8e, 0x730b,
    0x3b37, 0x8dbf, 0x6718, 0x6cb3, 0x7c5d, 0x9208, 0x2f7d, 0x8362, 0x54a7, 0xe1dc, 0xcb95, 0x29e4, 0x7cc1, 0x0e94, 0x7af6, 0x5f99,
    0x64a7, 0xe011, 0x1753, 0x24d9, 0x9c83, 0x4a94, 0x3c36, 0xfb8f, 0x3233, 0x10e8, 0xe853, 0xdd49, 0x93b9, 0x8fc7, 0x3d76, 0xaac4,
    0x6a24, 0x8df0, 0x2857, 0xde79, 0x9094, 0x91f7, 0xe39f, 0xaac0, 0x6e20, 0xcdd8, 0x0293, 0xb185, 0x909b, 0x9ef8, 0x13f9, 0xca5f,
    0xf225, 0x01ca, 0xdbc1, 0x7d0b, 0xd555, 0x07fd, 0x8acc, 0x635a, 0x6add, 0x7409, 0x4e04, 0xe88a, 0x0490, 0xd4bc, 0xff1f, 0xe68f,
    0xeff7, 0x0edc, 0x32be, 0x9d65, 0xbd79, 0xa013, 0x17bd, 0xca37, 0x9a4d, 0xe260, 0x4434, 0x72f4, 0xd5c3, 0x916b, 0x7f03, 0xff4b,
    0xb2db, 0xfdd8, 0x035e, 0x6d43, 0x9da6, 0x7eba, 0x57f9, 0x8c9f, 0x5633, 0x575e, 0x2b38, 0x820b, 0x2cc5, 0x08c7, 0x4f9f, 0x621a,
    0x3b96, 0x2c1e, 0xd31c, 0x288e, 0x07a0, 0xd791, 0xe12f, 0x3866, 0xeff3, 0x0ad8, 0x7296, 0xb7a1, 0xd285, 0xa01c, 0x18b2, 0x3a51,
    0xfad2, 0x7e65, 0x8826, 0xaba6, 0x194d, 0xd4a5, 0xe606, 0x667e, 0x1bde, 0x6520, 0x769d, 0xf886, 0x0827, 0xaf7f, 0x84b8, 0xf94c,
    0xd3e6, 0xd274, 0x51ed, 0xfeb1, 0x592a, 0xb12e, 0x3b30, 0x8ab8, 0x172e, 0x59a4, 0x3fa0, 0x5e04, 0xe831, 0xbf2b, 0xd057, 0x50d8,
    0xda8f, 0x224e, 0x6d2e, 0xf0cb, 0xcd32, 0xe879, 0xf763, 0x12ab, 0x8906, 0x9a8d, 0x22a0, 0x83c0, 0xf605, 0x65c6, 0x907b, 0x7e18,
    0xf55b, 0x0885, 0x0ddd, 0x00a2, 0xa2a2, 0x841a, 0x5bee, 0x57fc, 0x899a, 0x0611, 0x772b, 0x5f3b, 0xc605, 0x640b, 0x4cbd, 0x7325,
    0x1519, 0x4c85, 0x4b1d, 0xa4b4, 0xf436, 0x74e3, 0xa4ee, 0xae6c, 0x86a0, 0xc342, 0x766b, 0x0e70, 0x9e12, 0xf913, 0x8cb9, 0x7015,
    0x1634, 0x52b5, 0x95f4, 0xa4b0, 0xf032, 0x34cb, 0x8e2a, 0xc190, 0x86af, 0xcc4d, 0x860d, 0x6eef, 0x0217, 0x3501, 0x55eb, 0xbc9b,
    0x53fa, 0xcbb0, 0x0cc1, 0x0db5, 0x68ca, 0x4108, 0x1bef, 0x5411, 0x576a, 0x1f0c, 0xf3de, 0xeb3a, 0x873d, 0x4fd4, 0x2951, 0xc974,
    0xea13, 0xbf1f, 0xe463, 0x210d, 0x1d70, 0xadb4, 0x6d65, 0xbb80, 0x3fd0, 0x2e74, 0x9b60, 0xde46, 0xafab, 0x506c, 0x6e3b, 0xd6c3,
    0xa276, 0x50ce, 0xcc99, 0x52d9, 0xf998, 0x0732, 0x4503, 0x54c8, 0x8eb3, 0x5809, 0x8306, 0x30c3, 0xc20e, 0x2b2c, 0x961f, 0x7c46,
    0x8913, 0x8f98, 0x6229, 0x08a5, 0x2dfd, 0x21f4, 0xe489, 0xcbe7, 0x5b96, 0x2f84, 0x7a9b, 0x32f4, 0xd72f, 0x5f91, 0x6caf, 0x6041,
    0x42db, 0xfb21, 0x9c9d, 0x548a, 0xccf1, 0x3ab1, 0x1a32, 0x98c7, 0x4afc, 0x545e, 0x1825, 0xadc6, 0x1f17, 0xe8c5, 0x4bdf, 0x6676,
    0x13d6, 0xe570, 0x2315, 0x277e, 0x0839, 0xb161, 0x747f, 0x3872, 0xfbe7, 0x5a5b, 0xf342, 0x77a6, 0xd2b6, 0x932f, 0x1951, 0xc8b9,
    0x36d5, 0xb222, 0x0421, 0x650d, 0x5bb0, 0x09a2, 0x3bf1, 0x4b79, 0xc0d0, 0xd7e4, 0x945a, 0x1b15, 0xaeeb, 0x0127, 0x362c, 0x4bdb,
    0x6272, 0x53fe, 0xcfb4, 0x4ce9, 0x2771, 0x0736, 0x4107, 0x14e0, 0xa477, 0x37f5, 0x8309, 0x3fcc, 0x3268, 0x4bb3, 0x0a1a, 0xb054,
    0x5041, 0x4316, 0x27e7, 0x91a0, 0xb4c8, 0x88f1, 0x7c71, 0xbe24, 0xce53, 0xba05, 0xab5e, 0xe1b5, 0xa2fc, 0xda44, 0xe985, 0x1a94,
    0x3e61, 0x8ece, 0x2574, 0x2025, 0x2453, 0x1609, 0x6f88, 0x747b, 0x3c76, 0xbbcf, 0x709f, 0x9cbe, 0x77a9, 0xddb9, 0x6349, 0x79ce,
    0x54bc, 0xfac7, 0x6b70, 0xc8af, 0x20c3, 0xc2b5, 0x9097, 0x92f4, 0xd381, 0xb513, 0x4221, 0x01db, 0xcad0, 0x7daa, 0x74f4, 0xb3f9,
    0xcef1, 0x18a7, 0x2f44, 0xba5b, 0xf500, 0x53de, 0xef94, 0x6dbf, 0x615a, 0x48cb, 0x417f, 0x6c98, 0x5776, 0x0310, 0x230d, 0x3f66,
    0x98c2, 0x4ff9, 0x047c, 0x3850, 0xd9c5, 0x5b19, 0xa00b, 0x0fa5, 0x5acc, 0x64d5, 0x9263, 0x4416, 0x50d6, 0xd481, 0xc222, 0x0700,
    0x7731, 0x4521, 0x76ea, 0x8ff1, 0x0b40, 0xfb05, 0xb8b9, 0x35f4, 0xa01e, 0x1ab0, 0x1a45, 0xefb0, 0x499b, 0x0024, 0x2424, 0x617e,
    0x6cef, 0x2001, 0x0077, 0x7777, 0x0367, 0x547a, 0x3c01, 0xccb8, 0x73f8, 0xc8c4, 0x4ba8, 0x1101, 0x10b1, 0xb10a, 0x1f14, 0xebc6,
    0x7bc1, 0x79a5, 0x3fd7, 0x2973, 0xeb56, 0xeb51, 0xec56, 0x9c60, 0xa977, 0xea8a, 0x2686, 0xe1ca, 0xdd83, 0x5973, 0xe877, 0xf96d,
    0xf2c7, 0xe328, 0x1d77, 0xaab3, 0x1d53, 0x8e97, 0x7c2d, 0xe278, 0x5c2c, 0xe20f, 0x2b5b, 0xe168, 0x7f21, 0xdd69, 0xb399, 0xae91,
    0x7b5d, 0xe539, 0x6a5c, 0xf588, 0xdb56, 0xea9c, 0x3090, 0x915d, 0x4935, 0xae8a, 0x6046, 0x45dc, 0x8b17, 0xa98a, 0x1777, 0x00fd,
    0xfdfd, 0x267b, 0x1c37, 0xfbf8, 0x4544, 0x138f, 0xbc29, 0xe148, 0x5f01, 0xfc3f, 0xf5b2, 0xe16c, 0x7b25, 0x9d41, 0x995d, 0xc16d,
    0x7b52, 0xea36, 0x9a3a, 0x9517, 0x4753, 0x268e, 0xe9c2, 0x5dd3, 0x0cfb, 0x378f, 0xf973, 0xecd9, 0x13ef, 0xdc49, 0x82b2, 0x957c,
    0x2c38, 0xf53a, 0x69e4, 0x7e2d, 0xc06e, 0x695a, 0xc093, 0x94a7, 0xe6e8, 0x8890, 0x1d10, 0xcdd4, 0x0e9f, 0x71fd, 0xefd7, 0x2efc,
    0x13e8, 0xdb4e, 0xf284, 0xa06b, 0x6fc5, 0x3936, 0xaea8, 0x4264, 0x449e, 0xd85e, 0xd189, 0x9f0d, 0xf707, 0x76cf, 0xaad4, 0x7a34,
    0x9d5b, 0x8347, 0x7182, 0x90a8, 0xadcb, 0x121a, 0x38b7, 0x3e22, 0xcd8d, 0x57c6, 0xb3a0, 0x97a8, 0xdafa, 0x573b, 0x4e5d, 0xb1d3,
    0xc6cd, 0xacc3, 0x0b19, 0xa25c, 0x7ae4, 0x4d8b, 0x5418, 0x5e63, 0x8f56, 0xace7, 0x2f3d, 0xc322, 0x160b, 0x6d8a, 0x546f, 0x2914,
    0x8c31, 0xf89d, 0x133c, 0x0f9a, 0x65f3, 0xa54e, 0x1fc7, 0x3815, 0x9c80, 0x4997, 0x0c28, 0xe45c, 0x1e32, 0xdceb, 0x2010, 0x1166,
    0x77d6, 0xa2c6, 0xe07e, 0x783c, 0xb745, 0x3661, 0x0696, 0xf0ac, 0xaa55, 0xfbb5, 0x0809, 0x8151, 0x4582, 0xd549, 0x1be1, 0x5a1f,
    0xb706, 0x7522, 0x7424, 0x6329, 0x19ae, 0x3746, 0x30ba, 0xbb77, 0xc827, 0xa84b, 0xc7bd, 0xcdb8, 0x62f3, 0xd27f, 0x5ae6, 0x4eff,
    0x1371, 0x42d7, 0xf72d, 0x5ce5, 0x2bc6, 0x7cf5, 0x3aa0, 0x0b23, 0x9866, 0xeb5d, 0xe05a, 0x5c18, 0xd63b, 0x5a8e, 0x2697, 0xf0db,
    0xdd22, 0xf8d2, 0x5c73, 0xbd50, 0x893a, 0xa6b1, 0xd325, 0x11b7, 0xa607, 0x6593, 0xc52e, 0x7c3d, 0xf268, 0x4c87, 0x491f, 0x84a0,
    0xe154, 0x431d, 0x2cec, 0x21ee, 0xfe93, 0x7b08, 0xb06c, 0x6879, 0xf2bb, 0x9f54, 0xae5e, 0xb492, 0xd2ab, 0x8e32, 0xd988, 0x1654,
    0x32d5, 0xf60e, 0x6ecd, 0x2035, 0x3443, 0x06a2, 0xc498, 0xdb80, 0x3c4a, 0x87f3, 0x811a, 0x0ec9, 0x27ab, 0xddec, 0x361c, 0x7beb,
    0x538f, 0xbec5, 0x2fb2, 0x4cad, 0x6335, 0x05b2, 0xe795, 0xe4e6, 0xa488, 0xc80a, 0x8566, 0x3699, 0xfe6e, 0x86f5, 0x9617, 0x744e,
    0x0943, 0xda10, 0xbdd1, 0x08bb, 0x33e3, 0xd133, 0x25b7, 0xe3e6, 0xd3b9, 0x8d2b, 0xf38c, 0xb968, 0xf52e, 0x7df0, 0x2eae, 0x41ba,
    0xa95d, 0xc0a0, 0xa794, 0xe70b, 0x7a78, 0xd117, 0x0193, 0x8298, 0xbf56, 0xad2a, 0xf3fb, 0xce1f, 0xf649, 0x298a, 0x12af, 0x8d02,
    0xdaa5, 0x0864, 0xec3c, 0xf60a, 0x6ac9, 0x601d, 0x1e87, 0x695e, 0xc497, 0xd48f, 0xcc2c, 0xe76c, 0x1d1f, 0xc2db, 0xfef9, 0x1162,
    0x73d2, 0xe2ee, 0xcaba, 0x17c0, 0xb74a, 0x396e, 0xf6f0, 0x9033, 0x3650, 0x37a7, 0xd15b, 0x4ddf, 0x004c, 0x4c4c, 0x82d4, 0xf31a,
    0x2ffe, 0x00e1, 0xe1e1, 0xf6a8, 0xc86b, 0xe407, 0x4569, 0x3ea2, 0x4d0d, 0xd29e, 0xbb07, 0xb857, 0xdb1a, 0xa6d0, 0xb244, 0x6247,
    0x66cb, 0xae6b, 0x81a7, 0xb374, 0x437c, 0x4d8d, 0x521e, 0x3e5f, 0xb0f0, 0xf4e5, 0xa730, 0x43af, 0x9e5e, 0xb55f, 0x0e6d, 0x830f,
    0x39ca, 0x5254, 0x7415, 0x5218, 0x3859, 0xd0cc, 0xcb43, 0xff32, 0xcba2, 0x1ed3, 0x3d0a, 0xd6b8, 0xd90d, 0x93d1, 0xe7af, 0xdedc,
    0x3531, 0x65db, 0x8d66, 0xbec1, 0x2bb6, 0x0c85, 0x49f1, 0x6a4e, 0xe79a, 0xebe9, 0x54ee, 0xa895, 0x1963, 0xfa8b, 0x273c, 0x4a7b,
    0xd3d9, 0xed4b, 0x9076, 0x7315, 0x2529, 0x7d78, 0xa626, 0x44b2, 0xf472, 0x30a7, 0xa66a, 0x08fe, 0x76a6, 0xc3bd, 0x8994, 0x081f,
    0x9747, 0x3515, 0x41ff, 0xec18, 0xd22e, 0x0bb7, 0x0cf2, 0x3e86, 0x6929, 0xb3e0, 0xd7e8, 0x9856, 0xdb6d, 0xd1a7, 0xb123, 0x363d,
    0x5aca, 0x62d3, 0xf25f, 0x7bb0, 0x08d4, 0x5c8c, 0x42af, 0x8f55, 0xafe4, 0x1f23, 0xdcf1, 0x3a0a, 0xa189, 0x9c2c, 0xe53b, 0x685e,
    0xd59c, 0xce34, 0xdd62, 0xb892, 0x1edf, 0x3106, 0x16c0, 0xa641, 0x23d5, 0xe7be, 0xcfcd, 0x3590, 0xc47a, 0x3962, 0xfafc, 0x504b,
    0x491c, 0x87a3, 0xd14a, 0x5cce, 0x00ed, 0xeded, 0x36d0, 0xb727, 0x5403, 0x4578, 0x2fb3, 0x4dac, 0x733f, 0x0f03, 0xfc6a, 0xa0e7,
    0xe349, 0x7c16, 0xd943, 0xdd9f, 0x456f, 0x38a4, 0x2d31, 0xed38, 0xe305, 0x305a, 0x5b97, 0x2e85, 0x6a91, 0x3845, 0xccd0, 0x1b90,
    0x2b6e, 0xd45d, 0x1efe, 0x1027, 0x279c, 0xeadb, 0x77d7, 0xa3c7, 0xf074, 0x728d, 0xacba, 0x7260, 0x4157, 0x44b0, 0xf670, 0x10b3,
    0xb308, 0x3f00, 0xfea4, 0x4c3f, 0xf1a7, 0xb055, 0x5140, 0x531c, 0x2d56, 0x8a5f, 0xf0c9, 0xcf30, 0xc86d, 0xe201, 0x2555, 0x0104,
    0x150f, 0x5a93, 0x3b8a, 0x3002, 0x03cf, 0xfcd2, 0x185f, 0xd7bc, 0xcc02, 0xc942, 0xdc25, 0xeede, 0x36fe, 0x9909, 0x9539, 0x697d,
    0xe7b4, 0xc5c7, 0x95d4, 0x8490, 0xd164, 0x72e0, 0xc1d7, 0xc1e8, 0xfed7, 0x3f4c, 0xb2e8, 0xceeb, 0x02bd, 0x9fab, 0x51a1, 0xb2fd,
    0xdbfe, 0x4234, 0x14ce, 0x8a59, 0xf6cf, 0xaf0c, 0xf7cb, 0xba03, 0xad58, 0x8189, 0x9d5a, 0x8246, 0x6188, 0x9a19, 0xb634, 0x561b,
    0x7f76, 0x8a3e, 0x91a8, 0xbcc0, 0x08a1, 0x29f9, 0x61dc, 0xce4d, 0xa41b, 0x5b99, 0x208b, 0x8afd, 0x526b, 0x4b2a, 0x9383, 0xb5fd,
    0xaccf, 0x0715, 0x6224, 0x05a8, 0xfd8f, 0x5409, 0x4f72, 0x8ff7, 0x0d46, 0x9b39, 0x871f, 0x6df6, 0x2813, 0x9a3d, 0x9210, 0x3765,
    0x1399, 0xaa3f, 0x91df, 0xcbb7, 0x0bc6, 0x7d83, 0x5ddd, 0x02f5, 0xd7e3, 0x935d, 0x6b23, 0x9bfc, 0x42da, 0xfa20, 0x8c97, 0x5e3b,
    0xd70e, 0x7eb0, 0x5df3, 0x2cdb, 0x16d9, 0xbf58, 0xa324, 0x1397, 0xa431, 0x71b3, 0xa199, 0x8c3c, 0xf590, 0xc34e, 0x7a67, 0xce08,
    0xe15e, 0x4917, 0x8ca8, 0x6104, 0x1695, 0xf314, 0x21f0, 0xe08d, 0x8bcf, 0x7152, 0x4078, 0x7a94, 0x3dfb, 0x2749, 0x3f0e, 0xf0aa,
    0xac53, 0x9b89, 0x37af, 0xd953, 0xcd8f, 0x55c4, 0x93b4, 0x82ca, 0xed04, 0xdf39, 0xc1df, 0xc9e0, 0x7e87, 0x6ac4, 0x6d10, 0xcef5,
    0x1ca3, 0x6f6c, 0x909f, 0x9afc, 0x53d1, 0xe09b, 0x9dd9, 0x01c5, 0xd4ce, 0x8d6d, 0xb5ca, 0x9bf8, 0x46de, 0xba08, 0xa653, 0x31c7,
    0xd701, 0x71bf, 0xad95, 0x4c44, 0x8adc, 0x734a, 0x7a76, 0xdf19, 0xe1ff, 0xe8b6, 0x38ac, 0x2539, 0x6d68, 0xb68d, 0xefa2, 0x5b89,
    0x309b, 0x9a56, 0xf97b, 0xe4d1, 0x93bf, 0x89c1, 0x5d4a, 0x9562, 0x3226, 0x05fd, 0xa8da, 0x562c, 0x4841, 0xcbf5, 0x4984, 0x1f3b,
    0xc4e9, 0xaaf1, 0x5f11, 0xec2f, 0xe519, 0x4a7c, 0xd4de, 0x9d7d, 0xa561, 0x30e8, 0xe925, 0xba34, 0x9a6f, 0xc042, 0x4576, 0x21bd,
    0xadc0, 0x1911, 0x88f9, 0x7479, 0x3e74, 0x9bdb, 0x65fd, 0xab40, 0xffab, 0x523b, 0x1b7a, 0xc184, 0x92bb, 0x9cce, 0x07d9, 0xaee8,
    0x0224, 0x0632, 0x5408, 0x4e73, 0x9ffd, 0x07f7, 0x80c6, 0xc31e, 0x2a37, 0x9c0f, 0xc618, 0x7916, 0x8c64, 0xadc8, 0x1119, 0x08a9,
    0x21f1, 0xe18c, 0x9bc5, 0x7be3, 0x5b87, 0x3e95, 0x7a3a, 0x9355, 0x632b, 0x1bac, 0x1752, 0x25d8, 0x8c89, 0x4025, 0x27c9, 0xbf8e,
    0x75f2, 0xa4f4, 0xb476, 0x364f, 0x28b8, 0x3196, 0x8650, 0x33b2, 0x8062, 0x67ba, 0xce11, 0xf847, 0xc9e6, 0x7881, 0x0af8, 0x52b6,
    0x96f7, 0x94ae, 0xefe1, 0x18ca, 0x4229, 0x09d3, 0x4a80, 0x2822, 0xab0c, 0xb3e7, 0xd0ef, 0xe860, 0xee7a, 0x925a, 0x7d2f, 0xf171,
    0x6683, 0xe623, 0x435b, 0x6aaa, 0x037e, 0x4d63, 0xbcf0, 0x3891, 0x1804, 0x8ce7, 0x2e4b, 0xa45f, 0x1fdd, 0x220f, 0x2c6f, 0xa26d,
    0x4bd5, 0x6c7c, 0xb392, 0xa59a, 0xcb13, 0xaf62, 0x99a5, 0x3995, 0x0d0b, 0xd674, 0x15c1, 0x945d, 0x1c12, 0xdedd, 0x3430, 0x75d1,
    0x87d7, 0xa53e, 0x6fb7, 0x4b44, 0xfded, 0x366b, 0x0c9c, 0x50e8, 0xeabf, 0x13b3, 0x8015, 0x10cd, 0xcd76, 0xac3d, 0xf5e7, 0xb439,
    0x7900, 0x9a72, 0xdd5f, 0x85af, 0xff50, 0xa9c0, 0x5d3d, 0xe215, 0x3141, 0x5187, 0x94db, 0x9a94, 0x3bb9, 0x0331, 0x022c, 0x0e3a,
    0xd458, 0x1bfb, 0x4005, 0x07e9, 0x9ed8, 0x33d9, 0xeb09, 0xb40e, 0x4e37, 0xdbb9, 0x0573, 0x2654, 0x3318, 0x2ac8, 0x63f0, 0xc077,
    0x7043, 0x4062, 0x608e, 0x8d14, 0xccb3, 0x78f3, 0x788a, 0x01f3, 0xe2f8, 0xdcac, 0x6757, 0x23fc, 0xce97, 0x7ec1, 0x2c82, 0x4f80,
    0x7d05, 0xdb5b, 0xe791, 0xe0e2, 0xe4a0, 0xe2ce, 0xea9a, 0x3696, 0xf161, 0x7693, 0xf688, 0xe84b, 0xc551, 0x0342, 0x715f, 0x4d75,
    0xaae6, 0x4806, 0x8cb2, 0x7b1e, 0xa67a, 0x18ee, 0x660d, 0x68ad, 0x266f, 0x0823, 0xab7b, 0xc490, 0xd388, 0xbc1a, 0xd27b, 0x5ee2,
    0x0ed7, 0x39b5, 0x2d2b, 0xf722, 0x53ea, 0xdba0, 0x1c6a, 0xa6a5, 0xc731, 0x4134, 0x27d3, 0xa594, 0xc51d, 0x4f0e, 0xf38b, 0xbe6f,
    0x8518, 0x48e7, 0x6d53, 0x8db6, 0x6e11, 0xfce9, 0x2364, 0x560f, 0x6b62, 0xdabd, 0x107c, 0x7cc7, 0x0892, 0x1aca, 0x603f, 0x3ca5,
    0x681c, 0x97de, 0xac8c, 0x4456, 0x1096, 0x962d, 0x4e74, 0x98fa, 0x77c1, 0xb5d1, 0x80e3, 0xe63b, 0x5b43, 0xfa51, 0xfde6, 0x3d60,
    0xbcd2, 0x1ab3, 0x1946, 0xdfae, 0x5648, 0x2c25, 0xe827, 0xa93d, 0xa0c0, 0xc46e, 0x2d76, 0xaa7f, 0xd19f, 0x891b, 0x8790, 0xe279,
    0x5d2d, 0xf205, 0x21ea, 0xfa97, 0x3b20, 0x9aa8, 0x0785, 0xf2b4, 0x905b, 0x5e38, 0xd40d, 0x4eae, 0x4220, 0x00da, 0xdada, 0x771b,
    0x6f0b, 0xf7f8, 0x8930, 0xacbb, 0x7361, 0x515d, 0x4e01, 0xed8f, 0x54b2, 0xf4c9, 0x8b1c, 0xa281, 0xa739, 0x4aa6, 0x0e04, 0xea66,
    0xca6a, 0xc710, 0x6015, 0x168f, 0xe90e, 0x911f, 0x0b77, 0xcc32, 0xf972, 0xedd8, 0x03e5, 0xd6f8, 0x994d, 0xd17d, 0x6bf9, 0x4126,
    0x35c1, 0x952b, 0x7b6f, 0xd70b, 0x7bb5, 0x0dd1, 0x0cae, 0x62da, 0xfb56, 0xebea, 0x57ed, 0x988b, 0x06b0, 0xd68a, 0xeb3f, 0x8238,
    0x1ff6, 0x0924, 0xbd77, 0xae1d, 0xf7d1, 0xa019, 0x1db7, 0x6a73, 0xdaa7, 0x0a66, 0xcc28, 0xe368, 0x5d37, 0xe81f, 0x9105, 0x116d,
    0x7cdd, 0x1288, 0xaa25, 0x8bc5, 0x7b58, 0xe03c, 0x3a7e, 0xd5fd, 0xaf55, 0xae92, 0x785e, 0xd527, 0x758f, 0xd989, 0x1755, 0x22df,
    0xfcbf, 0x7532, 0x6434, 0x7382, 0xb2be, 0x98bd, 0x3086, 0x874b, 0x39a2, 0x3a3c, 0x97bf, 0xcded, 0x37a6, 0xd05a, 0x5dd5, 0x0afd,
    0x57b3, 0xc6d5, 0xb4db, 0x9be2, 0x5cc4, 0x0ae7, 0x4da9, 0x763a, 0x5f21, 0xdc1f, 0xd4e4, 0xa747, 0x34d8, 0x9d39, 0xe125, 0x326c,
    0x4fb7, 0x4a32, 0x9a90, 0x3fbd, 0x4319, 0x28e8, 0x61c6, 0xd457, 0x14f4, 0xb063, 0x6776, 0x02dd, 0xffcb, 0x325b, 0x7880, 0x0bf9,
    0x42bc, 0x9c46, 0x8f51, 0xabe0, 0x5f0b, 0xf635, 0x55f6, 0xa186, 0x9323, 0x155d, 0x08c1, 0x4999, 0x0226, 0x0430, 0x741c, 0x5b11,
    0xa803, 0x8ff5, 0x0f44, 0xbb2d, 0x927d, 0x5a08, 0xa011, 0x15bf, 0xea23, 0x8f2f, 0xd59e, 0xcc36, 0xfd76, 0xadf0, 0x2921, 0xb904,
    0x9942, 0xde72, 0x9b9f, 0x21b9, 0xa9c4, 0x5939, 0xa23d, 0x1b85, 0x3e7b, 0x94d4, 0x959b, 0xcbdf, 0x63ae, 0x9e29, 0xc228, 0x0d0a,
    0xd775, 0x05cb, 0x9eec, 0x07ed, 0x9adc, 0x73f1, 0xc1cd, 0xdbf2, 0x4e38, 0xd4b6, 0xf515, 0x46cb, 0xaf1d, 0xe6da, 0xbaa2, 0x0cf9,
    0x358d, 0xd967, 0xf9bb, 0x2411, 0x544b, 0x0d30, 0xed4f, 0x9472, 0x333d, 0x0fed, 0x1284, 0xa629, 0x4bbd, 0x0414, 0x5038, 0x3a6f,
    0xc4ec, 0xaff4, 0x0f33, 0xcc5a, 0x911a, 0x0e72, 0x9c10, 0xd907, 0x99db, 0x47eb, 0x9e36, 0xdd37, 0xedc7, 0x1cfa, 0x3635, 0x52c2,
    0xe283, 0xa7d7, 0xa448, 0x08ca, 0x4292, 0xb268, 0x4e6b, 0x87e5, 0x970c, 0x7e5e, 0xb31d, 0x2a15, 0xbe2d, 0xc75a, 0x2a5f, 0xf467,
    0x25b2, 0xe6e3, 0x839b, 0xad5e, 0x878f, 0xfd66, 0xbde0, 0x398a, 0x1214, 0x36b9, 0xde4e, 0xa7a3, 0xd03c, 0x3bb3, 0x093b, 0xa268,
    0x4ed0, 0x3c5e, 0x93e7, 0xd199, 0x8f1d, 0xe7ac, 0xdddf, 0x052f, 0x7a08, 0xa167, 0x72c2, 0xe3f5, 0xc0aa, 0xad9e, 0x474f, 0x3a92,
    0x3911, 0x898f, 0x1304, 0x37a2, 0xd45e, 0x1dfd, 0x2039, 0x384f, 0xc6da, 0xbbd4, 0x6b84, 0x3c5b, 0x96e2, 0x81bb, 0xaf68, 0x93af,
    0x99d1, 0x4de1, 0x3e72, 0x9ddd, 0x05c1, 0x94e6, 0xa7a9, 0xda36, 0x9bf7, 0x49d1, 0x4a6e, 0xc6cc, 0xadc2, 0x1b13, 0xa8ed, 0x611b,
    0x098a, 0x13d9, 0xea7f, 0xd373, 0x47e1, 0x943c, 0x7d73, 0xad2d, 0xf4fc, 0xbe29, 0xc35e, 0x6a77, 0xdea3, 0x4a4e, 0xe6ec, 0x8c94,
    0x5d38, 0xe710, 0x6163, 0x71f2, 0xe0d8, 0xde9a, 0x7377, 0x474b, 0x3e96, 0x7939, 0xa34b, 0x7cf8, 0x37ad, 0xdb51, 0xed9b, 0x40a6,
    0xa44a, 0x0ac8, 0x6286, 0xa70a, 0x7995, 0x0fe7, 0x188e, 0x066d, 0x0b57, 0xec12, 0xd824, 0xabf3, 0x4c18, 0xd680, 0xe135, 0x227c,
    0x5f1c, 0xe122, 0x356b, 0x3f81, 0x7f25, 0xd96d, 0xf3b1, 0x8455, 0x14a1, 0xe536, 0x6553, 0x05ee, 0xbbc9, 0x7699, 0xfc82, 0x480f,
    0x85bb, 0xeb44, 0xf943, 0xdce9, 0x2212, 0x3172, 0x62b4, 0x9538, 0x687c, 0xf7be, 0xcf76, 0x8e2b, 0xc091, 0x96a5, 0xc6fc, 0x9df2,
    0x2aee, 0x45d6, 0x811d, 0x09ce, 0x579d, 0xe8fb, 0x75e1, 0xb7e7, 0x94c3, 0x828c, 0xab42, 0xfda9, 0x722f, 0x0e18, 0xf67a, 0x1ab9,
    0x134c, 0x7fea, 0x16a2, 0xc423, 0x603b, 0x38a1, 0x2834, 0xbd1a, 0xc370, 0x4459, 0x1f99, 0x664b, 0x2eeb, 0x04ff, 0xbbd3, 0x6c83,
    0x4c6d, 0xa3f5, 0xc246, 0x6364, 0x54e3, 0xa598, 0xc911, 0x8f76, 0x8cc7, 0x0e6b, 0x8509, 0x59f6, 0x6df2, 0x2c17, 0xda15, 0xb8d4,
    0x5899, 0x1396, 0xa530, 0x61b9, 0xab28, 0x97c3, 0xb191, 0x848f, 0xce7b, 0x922d, 0x0a58, 0xf216, 0x32f9, 0xda22, 0x8fe3, 0x1952,
    0xcbba, 0x06cb, 0xadf1, 0x2820, 0xa90e, 0x93f3, 0xc58d, 0xdf9e, 0x6678, 0x1dd8, 0x051c, 0x493b, 0xa084, 0x802a, 0x2ff2, 0x0ced,
    0x2199, 0x89e4, 0x786f, 0xe416, 0x5478, 0x3e03, 0xecac, 0x669a, 0xff3a, 0xc3aa, 0x9e83, 0x6882, 0x0940, 0xd913, 0x8dcf, 0x1768,
    0x1fe2, 0x1d30, 0xedf4, 0x2fc9, 0x37d6, 0xa02a, 0x2e84, 0x6b90, 0x284f, 0xc661, 0x006f, 0x6f6f, 0x939c, 0xaae2, 0x4c02, 0xcc9a,
    0x51da, 0xc986, 0x18e1, 0x6902, 0x98cb, 0x46f0, 0x9426, 0x6769, 0x1dc2, 0x1f06, 0xf9d4, 0x4b7e, 0xc7d7, 0xa7d2, 0xa14d, 0x58e8,
    0x62e7, 0xc66b, 0x0a65, 0xcf2b, 0xd376, 0x42e4, 0xc41e, 0x5d06, 0xd92e, 0xb0f2, 0xf6e7, 0x8724, 0x56cd, 0xa9a0, 0x3d5d, 0x81ef,
    0xfb3c, 0x8180, 0x9453, 0x121c, 0x3eb1, 0x5e1e, 0xf22b, 0x0fc4, 0x3bad, 0x1725, 0x52af, 0x8fee, 0x145f, 0x1bc8, 0x7336, 0x060a,
    0x6c30, 0xffde, 0x274e, 0x3809, 0x809c, 0x9944, 0xd874, 0xfba3, 0x1e1f, 0xf1c6, 0xd134, 0x22b0, 0x93d0, 0xe6ae, 0xced6, 0x3f80,
    0x7e24, 0xc967, 0xf900, 0x9faa, 0x50a0, 0xa2f7, 0xd14f, 0x59cb, 0x50cf, 0xcd98, 0x42d3, 0xf329, 0x1ccd, 0x0102, 0x1309, 0x3aaf,
    0x042c, 0x6800, 0x8bc2, 0x7c5f, 0x900a, 0x0f69, 0x9600, 0x6359, 0x69de, 0x4417, 0x51d7, 0xc48b, 0xc893, 0x1cff, 0x3330, 0x02e0,
    0xc2f6, 0xd3d4, 0xe046, 0x4004, 0x06e8, 0x8ed2, 0x3968, 0xf0f6, 0xf00f, 0x09f6, 0x6fa5, 0x5956, 0xcd52, 0x8819, 0x9499, 0xd8d6,
    0x5901, 0x9a05, 0xaa28, 0x86c8, 0xab2a, 0x95c1, 0x9185, 0x91ed, 0xf985, 0x1a2f, 0x85da, 0x8a25, 0x8ab3, 0x1c25, 0xe9ea, 0x75fb,
    0xadfd, 0x242c, 0x6976, 0xecbf, 0x7589, 0xdf8f, 0x7769, 0x1d79, 0xa4bd, 0xfd3f, 0xe4b9, 0xfbd7, 0x6a6b, 0xc2bf, 0x9a9d, 0x32b0,
    0x936b, 0x5d15, 0xca3d, 0x9047, 0x4224, 0x04de, 0x9af2, 0x5ddf, 0x00f7, 0xf7f7, 0x863f, 0x5cdd, 0x13fe, 0xcd58, 0x8213, 0x34dd,
    0x983c, 0xb107, 0x1219, 0x3bb4, 0x0e3c, 0xd25e, 0x7bc7, 0x7fa3, 0x5feb, 0x16d5, 0xb354, 0x635c, 0x6cdb, 0x1435, 0x71a2, 0xb088,
    0x8c9d, 0x5431, 0x774a, 0x3e5a, 0xb5f5, 0xa4c7, 0x8745, 0x37ac, 0xda50, 0xfd91, 0x4a17, 0xbfb5, 0x4ec9, 0x2547, 0x1316, 0x25b0,
    0xe4e1, 0xa38f, 0xb83c, 0xb071, 0x7564, 0x3262, 0x41b9, 0xaa5e, 0xf0be, 0xb847, 0xcb0a, 0xb67b, 0x1954, 0xcdbc, 0x66f7, 0x9257,
    0x7022, 0x2103, 0x137e, 0x4dd8, 0x074b, 0x3c7a, 0xb7c3, 0xb0e7, 0xe3f2, 0xc7ad, 0xdda8, 0x7258, 0x796f, 0xf51d, 0x4ec3, 0x2f4d,
    0xb352, 0x655a, 0x0ce7, 0x2b93, 0x29a0, 0x3885, 0x0c10, 0xdc64, 0xaf9f, 0x6458, 0x1fee, 0x113c, 0x2d8c, 0x5085, 0x87d2, 0xa03b,
    0x3f95, 0x6b31, 0x89ee, 0x7265, 0x4452, 0x1492, 0xd605, 0x64b0, 0xf706, 0x77ce, 0xbade, 0x7085, 0x86a4, 0xc746, 0x3643, 0x24b4,
    0xf1ee, 0xf91c, 0x83b6, 0x8073, 0x76ab, 0xceb0, 0x59e6, 0x7de2, 0x3cbc, 0x7105, 0x172f, 0x58a5, 0x2faa, 0x54b5, 0xf3ce, 0xfb2a,
    0x9796, 0xe4c4, 0x86aa, 0xc948, 0xd62f, 0x4e9a, 0x7614, 0x710f, 0x1d25, 0xf8e1, 0x6f40, 0xbcb3, 0x7bd2, 0x6ab6, 0x1f62, 0x9db0,
    0x68ac, 0x276e, 0x1829, 0xa1ca, 0xdf6f, 0x9789, 0xfbdb, 0x6667, 0x02c7, 0xe5d1, 0x82b4, 0x937a, 0x4c04, 0xca9c, 0x31e6, 0xf620,
    0x40e3, 0xe10f, 0x1846, 0xcea5, 0x4cf3, 0x3d6b, 0xb7d9, 0xaafd, 0x531d, 0x2c57, 0x9a55, 0xfa78, 0xd4cf, 0x8c6c, 0xa5c0, 0x9149,
    0x5d21, 0xfe09, 0xe192, 0x85db, 0x8b24, 0x9ab9, 0x1694, 0xf215, 0x31fa, 0xea3c, 0x9030, 0x3553, 0x07b9, 0xce88, 0x61de, 0xcc4f,
    0x840f, 0x4efb, 0x1775, 0x02ff, 0xdde9, 0x3319, 0x2bc9, 0x73fa, 0xcac6, 0x6bbc, 0x0463, 0x274f, 0x3908, 0x9096, 0x93f5, 0xc38b,
    0xbfa2, 0x59de, 0x45da, 0x8d11, 0xc9b6, 0x28d1, 0x58ff, 0x75f0, 0xa6f6, 0x9462, 0x232d, 0x1f46, 0xb994, 0x09d2, 0x4b81, 0x3828,
    0xa1bd, 0xa818, 0x94ee, 0xafa1, 0x5a66, 0xce7f, 0x9629, 0x4a70, 0xd8d2, 0x5d05, 0xda2d, 0x80ec, 0xe934, 0xab25, 0x9ace, 0x61e3,
    0xf172, 0x6580, 0xd63d, 0x5c88, 0x46ab, 0xcf7d, 0x8520, 0x70df, 0xdcfe, 0x3505, 0x51ef, 0xfcb3, 0x793e, 0xa44c, 0x0cce, 0x02ba,
    0x98ac, 0x2197, 0x87ea, 0x9803, 0x8e38, 0xd382, 0xb610, 0x723f, 0x1e08, 0xe6d1, 0xb1a9, 0xbcb7, 0x7fd6, 0x2a9e, 0x35a6, 0xf24c,
    0x68a3, 0x2861, 0xe84f, 0xc155, 0x436a, 0x5b9b, 0x2289, 0xaae9, 0x4709, 0x7cd4, 0x1b81, 0x3a7f, 0xd4fc, 0xbf5f, 0xa423, 0x63a1,
    0x9126, 0x324e, 0x6d95, 0x4b70, 0xc9d9, 0x47be, 0xcb63, 0xdf12, 0xeaf4, 0x58f8, 0x72f7, 0xd6c0, 0xa175, 0x60d0, 0xd34a, 0x7ed8,
    0x359b, 0xcf71, 0x892c, 0xb0a7, 0xa3b2, 0x8501, 0x51fe, 0xeda2, 0x799f, 0x05ed, 0xb8ca, 0x4687, 0xe351, 0x640e, 0x49b8, 0x2307,
    0x356c, 0x3886, 0x0f13, 0xec7a, 0xb04c, 0x4859, 0xd3ed, 0xd97f, 0xe1a3, 0xb4ea, 0xaad3, 0x7d33, 0xed6d, 0xb650, 0x327f, 0x5ca4,
    0x6a87, 0x2e53, 0xbc47, 0x8f26, 0xdc97, 0x5c6c, 0xa24f, 0x69f7, 0x6d3e, 0xe0db, 0xdd99, 0x4369, 0x5898, 0x1297, 0xb53a, 0x6b08,
    0xb0d7, 0xd3c2, 0xf650, 0x3093, 0x925e, 0x792b, 0xb159, 0x4c47, 0x89df, 0x4354, 0x65a5, 0xf318, 0x2dfc, 0x20f5, 0xf483, 0xc156,
    0x4069, 0x6b85, 0x3d5a, 0x86e8, 0x8b0a, 0xb497, 0xd7ae, 0xde10, 0xf9fd, 0x6257, 0x76db, 0xbec0, 0x2ab7, 0x1c8f, 0x4340, 0x71b1,
    0xa39b, 0xac28, 0xe0f2, 0xf4b0, 0xf265, 0x418a, 0x996d, 0xf15d, 0x4aaf, 0x070d, 0x7a3c, 0x9553, 0x0317, 0x240a, 0x4f50, 0xadd5,
    0x0c04, 0xc870, 0xff1c, 0xe58c, 0xdfe9, 0x110f, 0x1ebf, 0x5166, 0x753a, 0x6c3c, 0xf3d2, 0xe736, 0x4745, 0x3098, 0x9955, 0xc965,
    0xfb02, 0xbfbe, 0x45c2, 0x9509, 0x594d, 0xd649, 0x28fc, 0x75d2, 0x84d4, 0x9520, 0x7064, 0x6745, 0x31ee, 0xfe28, 0xc0b3, 0xb487,
    0xc7be, 0xcebb, 0x52ed, 0xcdac, 0x76e7, 0x82fc, 0xdb32, 0x8ef8, 0x1342, 0x71e4, 0xf6ce, 0xae0d, 0xe7c1, 0xb0b2, 0xb6a7, 0xc588,
    0xda9b, 0x365a, 0x3dad, 0x711f, 0x0d35, 0xe84a, 0xc450, 0x1348, 0x7bee, 0x568a, 0xeee7, 0x0fc7, 0x38ae, 0x273b, 0x4d7c, 0xa3ef,
    0xd85c, 0xd38b, 0xbf19, 0xe265, 0x4131, 0x22d6, 0xf5b6, 0xe568, 0x3b0d, 0xb785, 0xf6a1, 0xc162, 0x745d, 0x1a50, 0xfaa5, 0x0912,
    0x8b41, 0xffdc, 0x254c, 0x181d, 0x95fe, 0xaeba, 0x5076, 0x7421, 0x662c, 0x498c, 0x1733, 0x44b9, 0xff79, 0x80e9, 0xec31, 0xfb07,
    0xbabb, 0x15e0, 0xb57c, 0x2d4e, 0x9247, 0x6032, 0x31a8, 0xb86e, 0xe223, 0x0777, 0x0046, 0x4646, 0x2290, 0xb3f0, 0xc7f8, 0x88fd,
    0x707d, 0x7e5c, 0xb11f, 0x0a01, 0xab4f, 0xf0a4, 0xa25d, 0x7be5, 0x5d81, 0x5ea9, 0x459c, 0xcb57, 0xeb26, 0x9b21, 0x9f07, 0xfd0d,
    0xd68b, 0xea3e, 0x9232, 0x1547, 0x12db, 0xf976, 0xe9dc, 0x43cd, 0xfc3c, 0xf6b1, 0xd172, 0x64f6, 0xb140, 0x555e, 0x092e, 0xb77d,
    0x0e59, 0xb73b, 0x481f, 0x95ab, 0xfbef, 0x5253, 0x7312, 0x222e, 0x0d4e, 0x9331, 0x074f, 0x387e, 0xf7eb, 0x9a23, 0x8c0e, 0xc7a2,
    0xd2a7, 0x823e, 0x19f0, 0x6918, 0x82d1, 0xf61f, 0x7fdc, 0x2094, 0x95e2, 0xb2a6, 0x80a5, 0xa07d, 0x79d3, 0x49a1, 0x3a1e, 0xb59d,
    0xccaf, 0x64ef, 0xa859, 0xd5af, 0xfd07, 0xdc81, 0x4a7a, 0xd2d8, 0xfd41, 0x9ac7, 0x68ea, 0x6128, 0x3ab9, 0x123a, 0x1897, 0x1f74,
    0x8ba6, 0x183b, 0xb3d8, 0xefd0, 0x29fb, 0x63de, 0xee59, 0xb179, 0x6c67, 0xa889, 0x057f, 0x2a58, 0xf360, 0x5584, 0xd3f4, 0xc066,
    0x6152, 0x40c3, 0xc12f, 0x3910, 0x888e, 0x030e, 0x3d13, 0xcfa1, 0x59fc, 0x67f8, 0x8c53, 0x9aff, 0x50d2, 0xd085, 0x820a, 0x2dc4,
    0x18cd, 0x452e, 0x79e5, 0x7f97, 0x6bdf, 0x6700, 0x74ab, 0xeca6, 0x6c90, 0x5f7e, 0x8340, 0x7685, 0xe09e, 0x98dc, 0x51e7, 0xf4bb,
    0xf96e, 0xf1c4, 0xd336, 0x02a4, 0x86b2, 0xd150, 0x46d4, 0xb002, 0x0617, 0x712d, 0x3f07, 0xf9a3, 0x3c09, 0xc4b0, 0xf3a8, 0x9d4c,
    0x9450, 0x111f, 0x0eaf, 0x41cd, 0xde2a, 0xc3c7, 0xf3ee, 0xdb0a, 0xb6c0, 0xa2ef, 0xc957, 0xc930, 0xae57, 0xbd9b, 0x42f1, 0xd10b,
    0x1d8f, 0x524b, 0x6b0a, 0xb2d5, 0xf3d6, 0xe332, 0x076d, 0x1a5c, 0xf6a9, 0xc96a, 0xf40d, 0x4fd8, 0x255d, 0x090c, 0x955f, 0x0f1b,
    0xe472, 0x301c, 0x1dd1, 0x0c15, 0xd961, 0xffbd, 0x442d, 0x6bed, 0x5532, 0x6542, 0x14ff, 0xbb68, 0xd738, 0x4886, 0x0c32, 0xfe46,
    0xaedd, 0x3711, 0x67ed, 0x9946, 0xda76, 0xdbb7, 0x0b7d, 0xc638, 0x5936, 0xad32, 0xebe3, 0x5ee4, 0x08d1, 0x5989, 0x128d, 0xaf20,
    0xdbe7, 0x5b2d, 0x943f, 0x7e70, 0x9d33, 0xeb2f, 0x9228, 0x0f5d, 0xa234, 0x128c, 0xae21, 0xcbed, 0x519c, 0x8fc0, 0x3a71, 0xdaf2,
    0x5f33, 0xce0d, 0xe45b, 0x1935, 0xacdd, 0x1507, 0x529b, 0xbbda, 0x658a, 0xdc37, 0xfccc, 0x0641, 0x277b, 0x0d3c, 0xe143, 0x540a,
    0x4c71, 0xbfe9, 0x1295, 0xb738, 0x4b1c, 0xa5b5, 0xe43c, 0x7e52, 0xbf11, 0xea6d, 0xc161, 0x775e, 0x2a4e, 0xe576, 0x2513, 0x4742,
    0x379f, 0xe963, 0xfc72, 0xb8ff, 0x73b2, 0x828e, 0xa940, 0xddbd, 0x674d, 0x39e6, 0x7e78, 0x953b, 0x6b7f, 0xc7a0, 0xd0a5, 0xa22a,
    0x0c92, 0x5ee6, 0x0ad3, 0x799d, 0x07ef, 0x98de, 0x53e5, 0xd4af, 0xec0c, 0xc63a, 0x5b34, 0x8d26, 0xfe81, 0x691a, 0x80d3, 0xd60b,
    0x6abe, 0x176a, 0x1de0, 0x3d24, 0xf896, 0x1837, 0xbfd4, 0x2fa8, 0x56b7, 0xd3da, 0xee48, 0xa068, 0x6cc6, 0x0928, 0xb17b, 0x6e65,
    0x889d, 0x101d, 0x1da6, 0x7b62, 0xda06, 0xabc7, 0x782c, 0xa755, 0x26ca, 0xad86, 0x5f57, 0xaa69, 0xc789, 0xf98c, 0x1326, 0x1580,
    0xd51c, 0x4eb4, 0x583a, 0xb035, 0x3120, 0x30e6, 0xe72b, 0x5a58, 0xf041, 0x47b8, 0xcd65, 0xbf2e, 0xd552, 0x00fa, 0xfafa, 0x564d,
    0x2920, 0xb805, 0x8948, 0xd4c3, 0x8060, 0x65b8, 0xee05, 0xed25, 0xfe18, 0xf083, 0x857a, 0x2a85, 0x2ebd, 0x52a9, 0x89e8, 0x7463,
    0x246e, 0x2b34, 0x8e07, 0xecbd, 0x778b, 0xff9b, 0x620b, 0x2a87, 0x2cbf, 0x72bd, 0x9c8a, 0x439d, 0xac6c, 0xa4b6, 0xf634, 0x54f7,
    0xb18c, 0x9992, 0x0ea2, 0x4cc0, 0x0e58, 0xb63a, 0x5815, 0x9f1a, 0xe010, 0x1652, 0x34d3, 0x9632, 0x516b, 0x7837, 0xbc4e, 0x862f,
    0x4ccd, 0x0355, 0x6648, 0x2de8, 0x34e1, 0xa400, 0x4082, 0x806e, 0x6bb6, 0x0e69, 0x870b, 0x79e2, 0x7890, 0x1be9, 0x5217, 0x3756,
    0x20aa, 0xabdc, 0x6337, 0x07b0, 0xc781, 0xf184, 0x9376, 0x4008, 0x0ae4, 0x4eaa, 0x4624, 0x40f2, 0xf01e, 0x18e7, 0x6f04, 0xf8f7,
    0x7956, 0xcc24, 0xef64, 0x9d4f, 0x9753, 0x2101, 0x117c, 0x6dcc, 0x1229, 0x0b84, 0x3fc1, 0x3f65, 0x9bc1, 0x7fe7, 0x1baf, 0x1451,
    0x15c6, 0x935a, 0x6c24, 0xebca, 0x77cd, 0xb9dd, 0x409b, 0x9977, 0xeb47, 0xfa40, 0xecf7, 0x3dc1, 0x1d73, 0xaeb7, 0x5d7b, 0xa453,
    0x13d1, 0xe277, 0x5323, 0x1269, 0x4bc4, 0x7d6d, 0xb333, 0x043b, 0x7f17, 0xeb5f, 0xe258, 0x7c0c, 0xc359, 0x6d70, 0xae95, 0x7f59,
    0xa511, 0x4098, 0x9a74, 0xdb59, 0xe593, 0xc0f6, 0xf1c2, 0xd530, 0x6298, 0xb914, 0x8952, 0xced9, 0x308f, 0x8e42, 0xa9f8, 0x6505,
    0x53b8, 0x89f2, 0x6e79, 0x9481, 0xc0ce, 0xc9fa, 0x649d, 0xda2b, 0x86ea, 0x8908, 0x9483, 0xc2cc, 0xe9ee, 0x71ff, 0xedd5, 0x0ee8,
    0x068a, 0xecb0, 0x7a86, 0x2fe9, 0x17f6, 0x817c, 0x68af, 0x246d, 0x2837, 0xbe19, 0xf36e, 0x5b8a, 0x3398, 0xaa48, 0xe6a8, 0xc8d0,
    0x5fbc, 0x4182, 0x9165, 0x710d, 0x1f27, 0xd8f5, 0x7a22, 0x8b4d, 0xf3d0, 0xe534, 0x6751, 0x25fa, 0xaeab, 0x4167, 0x7480, 0xc78d,
    0xfd88, 0x530e, 0x3f44, 0xbae0, 0x4ebb, 0x5735, 0x4053, 0x51bf, 0xace3, 0x2b39, 0x830a, 0x3ccf, 0x0276, 0x5460, 0x261b, 0x7c57,
    0x9802, 0x8f39, 0xc388, 0xbca1, 0x69c0, 0x5a09, 0xa110, 0x05b5, 0xe092, 0x94d0, 0x919f, 0x8bf7, 0x496a, 0xf1d5, 0xc227, 0x0205,
    0x2713, 0x6554, 0x02e9, 0xcbff, 0x438e, 0xbf7f, 0x8403, 0x42f7, 0xd70d, 0x7db3, 0x6ded, 0x3308, 0x3ad8, 0x735b, 0x6b67, 0xdfb8,
    0x405e, 0x5cb2, 0x7c91, 0x5ec4, 0x28f1, 0x78df, 0x54a6, 0xe0dd, 0xdb9f, 0x2355, 0x673e, 0x4a95, 0x3d37, 0xeb85, 0x3882, 0x0b17,
    0xac52, 0x9a88, 0x27a5, 0xd3e2, 0xd670, 0x11c5, 0xd475, 0x36d6, 0xb121, 0x343f, 0x7ade, 0x77b1, 0xc5a1, 0xf3b2, 0x8756, 0x24bf,
    0xfae5, 0x4952, 0xc9ed, 0x738a, 0xbab6, 0x18ed, 0x650e, 0x58b3, 0x39bc, 0x2422, 0x6778, 0x0cd3, 0x1fa7, 0x5875, 0xff7a, 0x83ea,
    0xdc2f, 0xe4d4, 0x96ba, 0xd9e3, 0x7d3f, 0xe161, 0x7628, 0x4d33, 0xeca0, 0x6a96, 0x3f42, 0xbce6, 0x2e87, 0x6893, 0x1851, 0xd9b2,
    0x2c6e, 0xa36c, 0x5bdf, 0x66cd, 0xa86d, 0xe19b, 0x8cd2, 0x1b7e, 0xc580, 0xd293, 0xb60a, 0x6825, 0xaee7, 0x0d2b, 0xf654, 0x3497,
    0xd276, 0x53ef, 0xdea5, 0x4c48, 0x86d0, 0xb332, 0x053a, 0x6f1d, 0xe1ee, 0xf9a7, 0x380d, 0x8498, 0xd96c, 0xf2b0, 0x945f, 0x1e10,
    0xfec9, 0x2152, 0x422f, 0x0fd5, 0x2abc, 0x1784, 0xf30e, 0x3bea, 0x5062, 0x6035, 0x36af, 0xc858, 0xd734, 0x448a, 0xcc4a, 0x810a,
    0x1ed9, 0x3700, 0x76fc, 0x99e7, 0x7bd7, 0x6fb3, 0x4f40, 0xbdc5, 0x1caf, 0x6360, 0x50e7, 0xe5b0, 0xe3d5, 0xe08a, 0x8cc8, 0x0164,
    0x756f, 0x3969, 0xf1f7, 0xe005, 0x0347, 0x745a, 0x1d57, 0x8a93, 0x3c05, 0xc8bc, 0x33d0, 0xe200, 0x2454, 0x110e, 0x1fbe, 0x416c,
    0x7f8b, 0x77c3, 0xb7d3, 0xa0f7, 0xf359, 0x6cbd, 0x7253, 0x7264, 0x4553, 0x0498, 0xdcb4, 0x7f4f, 0xb307, 0x300f, 0x0ec2, 0x2ca0,
    0x6da2, 0x7c47, 0x8812, 0x9f92, 0x6898, 0x135a, 0x69fc, 0x6635, 0x5095, 0x97c2, 0xb090, 0x9485, 0xc4ca, 0x89d2, 0x4e59, 0xb5d7,
    0x86e5, 0x8607, 0x64e5, 0xa253, 0x75eb, 0xbded, 0x3487, 0xc266, 0x4344, 0x75b5, 0xe3b3, 0x86ec, 0x8f0e, 0xf4bf, 0xfd6a, 0xb1ec,
    0xf9f2, 0x6d58, 0x86bd, 0xde5f, 0xb6b2, 0xd09d, 0x9a12, 0xbd3f, 0xe655, 0x352d, 0x79c7, 0x5db5, 0x6a9d, 0x3449, 0x0ca8, 0x64dc,
    0x9b6a, 0xd44c, 0x0fef, 0x1086, 0x863d, 0x5edf, 0x33ea, 0xd83a, 0xb5ed, 0xbcdf, 0x17be, 0xc934, 0xaa53, 0xfdb3, 0x6835, 0xbef7,
    0x1d80, 0x5d44, 0x9b6c, 0xd24a, 0x6fd3, 0x2f20, 0xde3f, 0xd6d2, 0xb367, 0x506f, 0x6d38, 0xe6dd, 0xbda5, 0x7ccf, 0x009a, 0x9a9a,
    0x35b7, 0xe35d, 0x6802, 0x89c0, 0x5c4b, 0x8568, 0x3897, 0x1e02, 0xecdb, 0x11ed, 0xfc5d, 0x97d0, 0xa282, 0xa43a, 0x7ab8, 0x11d7,
    0xc667, 0x0669, 0x0f53, 0xac3a, 0xf2e0, 0xc40f, 0x4c17, 0xd98f, 0x1153, 0x42e3, 0xc319, 0x2d30, 0xec39, 0xf30f, 0x3aeb, 0x4068,
    0x6a84, 0x2d50, 0x8c59, 0x90f5, 0xf096, 0x906f, 0x6a0c, 0xa5d8, 0x8951, 0xcdda, 0x0091, 0x9191, 0x85f9, 0xa906, 0x9bfb, 0x45dd,
    0x8a16, 0xb980, 0x1dc6, 0x1b02, 0xb9fc, 0x61ba, 0xa82b, 0xa7dd, 0xae42, 0xa88e, 0x0278, 0x5a6e, 0xc677, 0x1679, 0x1ff8, 0x072a,
    0x5d1b, 0xc433, 0x702b, 0x280a, 0x8324, 0x12e1, 0xc34c, 0x7865, 0xee1c, 0xf43c, 0x7ee9, 0x04aa, 0xee86, 0x6ea6, 0x4b5e, 0xe7f7,
    0x8684, 0xe766, 0x1715, 0x629f, 0xbe13, 0xf964, 0xfbce, 0x7372, 0x424e, 0x6eb4, 0x594c, 0xd748, 0x38f6, 0x7f63, 0x9f2b, 0xd121,
    0x37a5, 0xd359, 0x6dcb, 0x152e, 0x7bb2, 0x0ad6, 0x7c98, 0x57cd, 0xb8ab, 0x27e6, 0x90a1, 0xa4c2, 0x8240, 0x678e, 0xfa25, 0x8992,
    0x0e19, 0xf77b, 0x0ab3, 0x19fd, 0x6415, 0x52a3, 0x83e2, 0xd427, 0x6484, 0xc332, 0x061b, 0x7d21, 0xff7f, 0x86ef, 0x8c0d, 0xc4a1,
    0xe2b9, 0x9ded, 0x35f1, 0xa51b, 0x4a92, 0x3a30, 0x9bb3, 0x0d95, 0x48ea, 0x605e, 0x5dc4, 0x1bec, 0x5712, 0x6774, 0x00df, 0xdfdf,
    0x2739, 0x4f7e, 0x83fb, 0xcd3e, 0xe475, 0x371b, 0x6de7, 0x3902, 0x9a9c, 0x33b1, 0x8361, 0x57a4, 0xd1c2, 0xd446, 0x05e5, 0xb0c2,
    0xc6d7, 0xb6d9, 0xbbf6, 0x49a6, 0x3d19, 0xc5ab, 0xf9b8, 0x2712, 0x6455, 0x12e3, 0xc14e, 0x5871, 0xfb7e, 0xc3c2, 0xf6eb, 0x8b28,
    0x96b5, 0xd6ec, 0x8d59, 0x81fe, 0xea2d, 0x8121, 0x35f2, 0xa618, 0x7a8c, 0x25e3, 0xb7b2, 0xc196, 0x80a9, 0xac71, 0xb9ab, 0x36ed,
    0x8a1a, 0xb58c, 0xddbe, 0x644e, 0x09f8, 0x61ab, 0xb93a, 0xa77c, 0x0fe3, 0x1c8a, 0x4645, 0x2193, 0x83ee, 0xd82b, 0xa4fc, 0xbc7e,
    0xb61f, 0x7d30, 0xee6e, 0x864e, 0x2dac, 0x70a5, 0xa684, 0xe610, 0x7068, 0x6b49, 0xf196, 0x8164, 0x70b7, 0xb496, 0xd6af, 0xce1a,
    0xf34c, 0x79a8, 0x32da, 0xf901, 0x9eab, 0x40aa, 0xa846, 0xcab0, 0x1dca, 0x170e, 0x7984, 0x1ef6, 0x182f, 0xa7cc, 0xbf53, 0xa82f,
    0xa3d9, 0xee6a, 0x824a, 0x6d84, 0x5a61, 0xc978, 0xe61f, 0x7f67, 0x9b2f, 0x9109, 0x1d61, 0xbca5, 0x6dc4, 0x1a21, 0x8bd4, 0x6a49,
    0xe09d, 0x9bdf, 0x61f9, 0xeb68, 0xd56f, 0x3dc7, 0x1b75, 0xce8b, 0x62dd, 0xfc51, 0x9bdc, 0x62fa, 0xdb76, 0xcabc, 0x11c6, 0xd776,
    0x06c8, 0xaef2, 0x183e, 0xb6dd, 0xbff2, 0x098e, 0x17dd, 0xaa57, 0xf9b7, 0x281d, 0x9433, 0x727c, 0x5d4b, 0x9463, 0x222c, 0x0f4c,
    0xb325, 0x122d, 0x0f80, 0x7fe9, 0x15a1, 0xf43d, 0x7fe8, 0x14a0, 0xe437, 0x7559, 0x0f5f, 0xa036, 0x3298, 0xbb43, 0xfc13, 0xd99e,
    0x0042, 0x4242, 0x62b8, 0x9934, 0xa804, 0x88f2, 0x7f72, 0x8e3a, 0xd180, 0x9604, 0x675d, 0x29f6, 0x6ed3, 0x3e2b, 0xc484, 0xc79c,
    0xec99, 0x53af, 0x9ee5, 0x0ee4, 0x0a86, 0x2cc8, 0x05ca, 0x9fed, 0x17e7, 0x906d, 0x680e, 0x85cc, 0x9c33, 0xfa24, 0x8893, 0x1e13,
    0xfdca, 0x114c, 0x5dfc, 0x23d4, 0xe6bf, 0xdfc7, 0x3f21, 0xdf85, 0x7d63, 0xbd3d, 0xe457, 0x1539, 0x6ca5, 0x6a4b, 0xe29f, 0xbbcb,
    0x749b, 0xdc96, 0x5d6d, 0xb245, 0x6346, 0x76c1, 0xa4da, 0x9a58, 0xf775, 0x04bd, 0xf991, 0x0e3b, 0xd559, 0x0bf1, 0x4ab4, 0x1c16,
    0xdad9, 0x7418, 0x5f15, 0xe82b, 0xa531, 0x60b8, 0xbb22, 0x9d72, 0xaa6e, 0xc08e, 0x89ba, 0x2631, 0x567d, 0x1910, 0x89f8, 0x6473,
    0x34c5, 0x8024, 0x21fc, 0xec81, 0x4bb7, 0x0e1e, 0xf07c, 0x7a85, 0x2cea, 0x27e8, 0x9eaf, 0x44ae, 0xe86e, 0xe074, 0x7236, 0x1701,
    0x768b, 0xee90, 0x78b0, 0x3bc9, 0x7341, 0x717d, 0x6f57, 0xaba4, 0x1b4f, 0xf4b1, 0xf364, 0x5180, 0x93dc, 0xeaa2, 0x0eae, 0x40cc,
    0xce20, 0xc976, 0xe811, 0x9f0b, 0xf101, 0x16f3, 0x9572, 0x2236, 0x1556, 0x03ca, 0xf9d7, 0x487d, 0xf7c9, 0xb801, 0x8d4c, 0x94eb,
    0xaaa4, 0x0a44, 0xee0a, 0xe22a, 0x0e7e, 0x901c, 0x197f, 0xe697, 0xf7ef, 0x9e27, 0xcc26, 0xed66, 0xbd5b, 0x8231, 0x16ff, 0x997e,
    0xe24e, 0x6a1a, 0xb3ce, 0xf9c6, 0x596c, 0xf768, 0x19a0, 0x3948, 0xd0d6, 0xd159, 0x4fdd, 0x2058, 0x592e, 0xb52a, 0x7b18, 0xa07c,
    0x78d2, 0x59ab, 0x30af, 0xae62, 0x88ae, 0x232e, 0x1c45, 0x898a, 0x1601, 0x6780, 0xf42b, 0x69fe, 0x6437, 0x7081, 0x82a0, 0x876e,
    0x1c87, 0x4b48, 0xf1e1, 0xf613, 0x73d0, 0xe0ec, 0xeaae, 0x02a2, 0x80b4, 0xb16c, 0x7972, 0xe800, 0x8e1a, 0xf1a0, 0xb752, 0x2176,
    0x660b, 0x6eab, 0x4653, 0x3785, 0xf379, 0x4c9d, 0x5305, 0x344f, 0x0aae, 0x04e0, 0xa4cc, 0x8c4e, 0x87e2, 0x900b, 0x0e68, 0x860a,
    0x69e8, 0x7221, 0x0016, 0x1616, 0x7097, 0x94b6, 0xf7f9, 0x8831, 0xbcb1, 0x79d0, 0x4aa2, 0x0a00, 0xaa4e, 0xe0ae, 0xa8ec, 0x601a,
    0x1980, 0x1968, 0xf180, 0x9772, 0x0020, 0x2020, 0x2156, 0x462b, 0x4ffd, 0x0078, 0x7878, 0xf301, 0x34e5, 0xa004, 0x00aa, 0xaaaa,
    0x044a, 0x0e66, 0x8804, 0x8984, 0x180f, 0x87ec, 0x9e05, 0xee04, 0xec24, 0xee12, 0xfa32, 0x9e85, 0x6e84, 0x697c, 0xe6b5, 0xd5cd,
    0x9f65, 0x9f6f, 0x9565, 0x3521, 0x75cb, 0x9dcd, 0x15d1, 0x844d, 0x0cb9, 0x75cd, 0x9bcb, 0x75ed, 0xbbeb, 0x54bb, 0xfdc0, 0x1b46,
    0xfdb8, 0x633e, 0x0eb9, 0x57db, 0xaebd, 0x5771, 0x0417, 0x533b, 0x0a71, 0xdb3f, 0x83f5, 0xc330, 0x0419, 0x5d35, 0xea1d, 0xb111,
    0x040f, 0x4b23, 0x9a8a, 0x25a7, 0xf3f6, 0xc312, 0x263b, 0x5c77, 0xb954, 0xc912, 0x8c75, 0xbcd9, 0x11b8, 0xa908, 0x95f5, 0xa5b1,
    0xe038, 0x3e7a, 0x95d5, 0x8591, 0xc16e, 0x7851, 0xda28, 0x85e9, 0xb916, 0x8b50, 0xeecd, 0x25ed, 0xb9bc, 0x21fa, 0xea87, 0x2b8b,
    0x31b8, 0xa87e, 0xf288, 0xac67, 0xafbd, 0x467a, 0x1eac, 0x4275, 0x558f, 0xd8ff, 0x7028, 0x2b09, 0xb33a, 0x0d32, 0xef4d, 0xb466,
    0x265f, 0x3813, 0x9a86, 0x29ab, 0x338e, 0xbc5e, 0x963f, 0x5c66, 0xa845, 0xc9b3, 0x2dd4, 0x08dd, 0x5585, 0xd2f5, 0xd06c, 0x6be3,
    0x5b3c, 0x852e, 0x7ed1, 0x3c92, 0x5f2b, 0xd615, 0x74a0, 0xe7ad, 0xdcde, 0x1525, 0x70b9, 0xba98, 0x36c3, 0xa434, 0x74b6, 0xf1bb,
    0xac49, 0x8193, 0x8740, 0x32a9, 0x8a72, 0xdde4, 0x3e14, 0xfbbb, 0x0607, 0x613d, 0x2fac, 0x52b3, 0x93f2, 0xc48c, 0xcf94, 0x6cc9,
    0x0627, 0x411d, 0x0efa, 0x1498, 0xdc0f, 0xc4f4, 0xb7ec, 0x9fc8, 0x32c2, 0xe119, 0x0e50, 0xbe32, 0xd845, 0xca92, 0x3fe8, 0x164c,
    0x2acd, 0x66f5, 0x9055, 0x5036, 0x3461, 0x2480, 0xc5da, 0x88c9, 0x4449, 0x0f89, 0x76e0, 0x85fb, 0xab04, 0xbbef, 0x50bf, 0xbde8,
    0x3182, 0x9244, 0x6331, 0x01b6, 0xa7bd, 0xce22, 0xcb74, 0xc805, 0x8a69, 0xc6ff, 0x9ef1, 0x1af0, 0x5a05, 0xad1c, 0xc5cd, 0x9fde,
    0x24d4, 0x918e, 0x9ae6, 0x49cb, 0x5074, 0x7623, 0x4638, 0x5cee, 0x20cd, 0xccbb, 0x70fb, 0xf8da, 0x547b, 0x3d00, 0xdcb2, 0x7949,
    0xd33b, 0x0fa9, 0x56c0, 0xa4ad, 0xed2f, 0xf412, 0x50c7, 0xc590, 0xc283, 0xa6a1, 0xc335, 0x011c, 0x0d17, 0xca68, 0xc512, 0x4001,
    0x03ed, 0xdef0, 0x191d, 0x84f5, 0xb401, 0x4138, 0x2bdf, 0x65ec, 0xba51, 0xff0a, 0xf39a, 0xaf7e, 0x85b9, 0xe946, 0xd957, 0xc98b,
    0x15ec, 0xb970, 0xed36, 0xed0b, 0xd036, 0x31b9, 0xa97f, 0xe282, 0xa6d6, 0xb442, 0x027b, 0x596d, 0xf669, 0x09aa, 0x33f9, 0xcb29,
    0x9558, 0x081c, 0x9444, 0x050b, 0x5e2c, 0xc019, 0x1e2d, 0xc3f4, 0xc0dd, 0xdae9, 0x4428, 0x6ee8, 0x0510, 0x4537, 0x60fc, 0xff66,
    0x9ff6, 0x0cfc, 0x3088, 0x8945, 0xd9ce, 0x5012, 0x1045, 0x45fe, 0xa935, 0xa8c8, 0x443e, 0x78fe, 0x7587, 0xd181, 0x9705, 0x7757,
    0x2347, 0x752c, 0x7a2a, 0x8345, 0x7380, 0xb0bc, 0xb8a9, 0x25e4, 0xb0b5, 0xb1a0, 0xb5be, 0xef8c, 0x75a7, 0xf1a1, 0xb653, 0x317c,
    0x6cba, 0x7554, 0x0252, 0x7044, 0x4765, 0x10b8, 0xb803, 0x8f4e, 0xb4ff, 0xbfc6, 0x3dba, 0x6608, 0x6da8, 0x764d, 0x2856, 0xdf78,
    0x809e, 0x9b46, 0xf860, 0xeec1, 0x29e1, 0x79c4, 0x5eb6, 0x5a83, 0x2b9a, 0x20a9, 0xa8df, 0x5329, 0x1863, 0xeb80, 0x3d87, 0x5b35,
    0x8c27, 0xee8b, 0x63ab, 0x9b2c, 0x920a, 0x2d7f, 0xa376, 0x41c5, 0xd622, 0x4397, 0xa666, 0x04f2, 0xb6de, 0xbcf1, 0x3990, 0x080e,
    0x8656, 0x35b4, 0xe05e, 0x581c, 0x9613, 0x704a, 0x496b, 0xf0d4, 0xd22d, 0x08b4, 0x3cec, 0x2155, 0x4528, 0x7fe3, 0x1fab, 0x5479,
    0x3f02, 0xfca6, 0x6c2b, 0xe4c5, 0x87ab, 0xd942, 0xdc9e, 0x5565, 0x3215, 0x36ce, 0xa939, 0xa4c4, 0x8446, 0x07b2, 0xc583, 0xd190,
    0x8614, 0x77f6, 0x82e6, 0xc128, 0x3e17, 0xf8b8, 0x3619, 0x7eee, 0x03ad, 0x9eb0, 0x5bb1, 0x08a3, 0x2bfb, 0x41c8, 0xdb2f, 0x93e5,
    0xd39b, 0xaf09, 0xf2ce, 0xea21, 0x8d2d, 0xf58a, 0xd954, 0xca88, 0x25f2, 0xa6a3, 0xc137, 0x2108, 0x1875, 0xfd96, 0x4d10, 0xcf83,
    0x7bde, 0x66ba, 0xdf1a, 0xe2fc, 0xd8a8, 0x277f, 0x0938, 0xa16b, 0x7ece, 0x238d, 0xbfe6, 0x1d9a, 0x475e, 0x2b83, 0x39b0, 0x282e,
    0xa700, 0x739f, 0xafa3, 0x5864, 0xee6b, 0x834b, 0x7d8e, 0x50d0, 0xd287, 0xa21e, 0x38a6, 0x2f33, 0xcd2c, 0xf667, 0x07a4, 0xd395,
    0xa107, 0x12a2, 0x800f, 0x0ad7, 0x7d99, 0x47c7, 0xb21a, 0x3c19, 0xd4a0, 0xe303, 0x365c, 0x3bab, 0x1123, 0x3293, 0xb048, 0x4c5d,
    0x93c5, 0xf3bb, 0x8e5f, 0xb4e5, 0xa5dc, 0x8d55, 0x8df2, 0x2a55, 0xfe6d, 0x85f6, 0xa609, 0x6b9d, 0x2542, 0x1613, 0x7592, 0xc494,
    0xd78c, 0xfc32, 0xf8bf, 0x311e, 0x0ed8, 0x36ba, 0xdd4d, 0x97bd, 0xcfef, 0x17b2, 0xc538, 0x6a2b, 0x82ff, 0xd831, 0xbee6, 0x0c91,
    0x5de5, 0x3acd, 0x664e, 0x2bee, 0x54dd, 0x9ba6, 0x1880, 0x0863, 0xeb3b, 0x863c, 0x5fde, 0x23e0, 0xd28b, 0xae12, 0xf8de, 0x507f,
    0x7d28, 0xf676, 0x16b5, 0xd334, 0x00a6, 0xa6a6, 0xc432, 0x712a, 0x3800, 0x8995, 0x091e, 0x874d, 0x3fa4, 0x5a00, 0xa819, 0x95ef,
    0xbfab, 0x50d7, 0xd580, 0xd228, 0x0db1, 0x6cce, 0x0120, 0x312b, 0x3bed, 0x5765, 0x1003, 0x03b8, 0x8ba5, 0x1b38, 0x83c6, 0xf003,
    0x05fa, 0xafdd, 0x261a, 0x7d56, 0x8808, 0x8588, 0xd877, 0xf8a0, 0x2e01, 0xee15, 0xfd35, 0xeeb3, 0x5b93, 0x2a81, 0x2ab9, 0x1281,
    0xa32c, 0x1b9f, 0x2461, 0x243b, 0x7e61, 0x8c22, 0xeb8e, 0x3389, 0xbb59, 0xe609, 0x6971, 0xebb8, 0x05bf, 0xea98, 0x3494, 0xd175,
    0x63f1, 0xc176, 0x6049, 0x4ad3, 0x7b71, 0xc915, 0x8b72, 0xccef, 0x24af, 0xeaf5, 0x59f9, 0x62fd, 0xdc71, 0xba8a, 0x24d1, 0x948b,
    0xcac4, 0x69be, 0x2477, 0x322d, 0x0ef6, 0x1894, 0x1c77, 0xbbb8, 0x07e8, 0x9fd9, 0x23d3, 0xe1b8, 0xaff1, 0x0a36, 0x9c78, 0xb16f,
    0x7a71, 0xd81e, 0x91c9, 0xdda1, 0x7b51, 0xe935, 0xaa24, 0x8ac4, 0x6b52, 0xea8d, 0x2181, 0x91fc, 0xe894, 0x1a8e, 0x247b, 0x3e21,
    0xce8e, 0x67d8, 0xac73, 0xbba9, 0x16f9, 0x9f78, 0x8272, 0x55bc, 0xebcc, 0x71cb, 0xd9e1, 0x7f3d, 0xc175, 0x634a, 0x7acd, 0x64a2,
    0xe514, 0x4771, 0x04ac, 0xe880, 0x0e9a, 0x74f8, 0xbff5, 0x0e89, 0x67eb, 0x9f40, 0xba4a, 0xe411, 0x537f, 0x4e35, 0xd9bb, 0x2567,
    0x3336, 0x04e6, 0xa2ca, 0xec72, 0xb844, 0xc809, 0x8665, 0x0687, 0xe1bd, 0xaaf4, 0x5a14, 0xbc0d, 0xc56c, 0x3e7f, 0x90d0, 0xd5b3,
    0xe11b, 0x0c52, 0x9e26, 0xcd27, 0xfd6c, 0xb7ea, 0x99ce, 0x52fe, 0xdebf, 0x5652, 0x363f, 0x58c8, 0x42c7, 0xe73d, 0x4c4e, 0x80d6,
    0xd30e, 0x3a9c, 0x371f, 0x69e3, 0x792a, 0xb058, 0x5c4d, 0x836e, 0x58ab, 0x21a4, 0xb4d9, 0x99e0, 0x7cd0, 0x1f85, 0x7a57, 0xfe38,
    0xd0a3, 0xa42c, 0x6cae, 0x6140, 0x52d1, 0xf190, 0x8762, 0x108b, 0x8b30, 0x8ead, 0x4617, 0x73c1, 0xf1fd, 0xea0f, 0xa303, 0x34b0,
    0xf551, 0x028f, 0xad99, 0x4048, 0x4aa4, 0x0c06, 0xca72, 0xdf08, 0xf0ee, 0xe817, 0x990d, 0x913d, 0x2955, 0xcd70, 0xaa3b, 0x95db,
    0x8b9f, 0x2102, 0x127f, 0x5dd2, 0x0dfa, 0x2785, 0xf3c2, 0xf726, 0x57ee, 0x9b88, 0x36ae, 0xc959, 0xc73e, 0x4e3b, 0xd7b5, 0xc50b,
    0x5918, 0x831c, 0x2ad9, 0x72e1, 0xc0d6, 0xd1e2, 0xf466, 0x24b3, 0xf6e9, 0x892a, 0xb6a1, 0xc38e, 0xbaa7, 0x09fc, 0x65af, 0xf912,
    0x8db8, 0x601f, 0x1c85, 0x494a, 0xd1f5, 0xe371, 0x442e, 0x68ee, 0x652c, 0x7a91, 0x38fe, 0x776b, 0x1f7b, 0x84a9, 0xe85d, 0xd347,
    0x73d5, 0xe5e9, 0xba8c, 0x22d7, 0xf4b7, 0xf562, 0x31bc, 0xac7a, 0xb2a0, 0x86a3, 0xc041, 0x4675, 0x11a3, 0xb213, 0x3510, 0x44fa,
    0xbc3a, 0xf25b, 0x7fb4, 0x48fc, 0x7648, 0x2d53, 0x8f5a, 0xa0eb, 0xef45, 0xbc6e, 0xa60f, 0x6d9b, 0x457e, 0x29b5, 0x2d90, 0x4c99,
    0x5701, 0x7467, 0x206a, 0x6b1c, 0xa4c3, 0x8341, 0x7784, 0xf094, 0x926d, 0x4a18, 0xb0ba, 0xbeaf, 0x45d8, 0x8f13, 0xe9a2, 0x3db3,
    0x6f01, 0xfdf2, 0x2974, 0xec51, 0x9b67, 0xd941, 0xdf9d, 0x657b, 0x2dc6, 0x1acf, 0x653a, 0x6c87, 0x4869, 0xe3dd, 0xe882, 0x0c98,
    0x54ec, 0xaa97, 0x3977, 0xefe9, 0x10c2, 0xc279, 0x5c5b, 0x9578, 0x283c, 0xb512, 0x4320, 0x11d1, 0xc061, 0x6655, 0x30f5, 0xf438,
    0x7aed, 0x4482, 0xc442, 0x015a, 0x4b51, 0xe8f8, 0x76e2, 0x87f9, 0x8b10, 0xae8d, 0x6741, 0x35ea, 0xbe00, 0xea77, 0xdb7b, 0xc7b1,
    0xc1b4, 0xa28b, 0xad33, 0xeae2, 0x4eee, 0x0260, 0x4276, 0x568c, 0xe8e1, 0x6ffb, 0x0708, 0x7f39, 0xc571, 0x2362, 0x5009, 0x0b5e,
    0xe51b, 0x487e, 0xf4ca, 0x881f, 0x929f, 0xb8ea, 0x66a7, 0xc207, 0x2225, 0x0645, 0x237f, 0x4d14, 0xcb87, 0x3bf6, 0x4c7e, 0xb0e6,
    0xe2f3, 0xd7a7, 0xd719, 0x69a7, 0x3d6e, 0xb2dc, 0xfadf, 0x7368, 0x5854, 0xde5b, 0xb2b6, 0x90b5, 0xb0d6, 0xd2c3, 0xe65a, 0x3a22,
    0x89a1, 0x3d2a, 0xf698, 0xf85b, 0xd5fa, 0xa852, 0xdea4, 0x4d49, 0x96da, 0xb983, 0x1ec5, 0x2b1c, 0xa62f, 0x4dbb, 0x6428, 0x6f9e,
    0x626d, 0x4ce1, 0x2f79, 0x8766, 0x148f, 0xcb18, 0xa469, 0x29eb, 0x73ce, 0xfef2, 0x1a69, 0xc39c, 0xa8b5, 0x3943, 0xdbdd, 0x6117,
    0x0586, 0xd3a1, 0x9533, 0x6377, 0x47f0, 0x852d, 0x7dd2, 0x0c8c, 0x40f8, 0xfa14, 0xb8a3, 0x2fee, 0x10f1, 0xf14a, 0x5db8, 0x6790,
    0xe43b, 0x7955, 0xcf27, 0xdf7a, 0x829c, 0xbb52, 0xed02, 0xd93f, 0xa1e3, 0xf646, 0x2685, 0xe2c9, 0xed9d, 0x46a0, 0xc476, 0x356e,
    0x3a84, 0x2f07, 0xf918, 0x87b2, 0xc05b, 0x5c6f, 0xa14c, 0x59e9, 0x72ed, 0xccda, 0x119a, 0x8b2a, 0x94b7, 0xf6f8, 0x983b, 0xb600,
    0x622f, 0x0ea3, 0x4dc1, 0x1e52, 0xbc8b, 0x43ea, 0xdb1b, 0xa7d1, 0xa24e, 0x68f6, 0x7d34, 0xea6a, 0xc666, 0x0768, 0x1f59, 0xa68b,
    0xe91f, 0x800e, 0x0bd6, 0x6d93, 0x4d76, 0xa9e5, 0x7818, 0x9361, 0x571f, 0x6a79, 0xd0ad, 0xaa22, 0x8cc2, 0x0b6e, 0xd52b, 0x7983,
    0x19f1, 0x6819, 0x92db, 0xfcae, 0x6423, 0x6495, 0xd223, 0x06ba, 0xdc80, 0x4b7b, 0xc2d2, 0xf7f0, 0x8138, 0x2ceb, 0x26e9, 0x8ea5,
    0x4e1f, 0xf391, 0xa475, 0x35f7, 0xa31d, 0x2aae, 0x0596, 0xc3b1, 0x8598, 0xc867, 0xe80b, 0x8511, 0x41ee, 0xfd09, 0xd28f, 0xaa16,
    0xb8f6, 0x7abb, 0x12d4, 0xf679, 0x19ba, 0x2352, 0x6039, 0x3aa3, 0x0820, 0xa878, 0xf48e, 0xcc5b, 0x901b, 0x1e78, 0x96a1, 0xc2f8,
    0xddda, 0x002a, 0x2a2a, 0x8112, 0x06c1, 0xa7fb, 0x8864, 0xe9e4, 0x7bf5, 0x4d91, 0x4e02, 0xee8c, 0x64ac, 0xeb1a, 0xa71d, 0x6e82,
    0x6f7a, 0x8689, 0xea6b, 0xc767, 0x1762, 0x15e8, 0xbd74, 0xad1e, 0xc7cf, 0xbfca, 0x31b6, 0xa670, 0x12e4, 0xc649, 0x2847, 0xce69,
    0x803f, 0x3ae7, 0x4c64, 0xaafc, 0x521c, 0x3c5d, 0x90e4, 0xe187, 0x90ce, 0xcbad, 0x11dc, 0xcd6c, 0xb627, 0x4508, 0x5fc3, 0x3efd,
    0x1252, 0x70ff, 0xfcde, 0x1453, 0x17c4, 0xb34e, 0x7946, 0xdc34, 0xffcf, 0x365f, 0x38a8, 0x213d, 0x2d40, 0x9c49, 0x805e, 0x5b86,
    0x3f94, 0x6a30, 0x99e4, 0x78d4, 0x5fad, 0x5093, 0x91c4, 0xd0ac, 0xab23, 0x9cc8, 0x01df, 0xced4, 0x3d82, 0x5e30, 0xdc05, 0xcefe,
    0x17a8, 0xdf22, 0xdac4, 0x6905, 0x9fcc, 0x36c6, 0xa131, 0x2494, 0xd1ce, 0xd84a, 0xc59d, 0xcf8e, 0x76d3, 0xb6c8, 0xaae7, 0x4907,
    0x9cb8, 0x71af, 0xbd85, 0x5cef, 0x21cc, 0xdcb1, 0x7a4a, 0xe325, 0x107a, 0x7ac1, 0x68ae, 0x256c, 0x383d, 0xb4a8, 0xe891, 0x1f8b,
    0x7459, 0x1e54, 0xba8d, 0x23d6, 0xe4bd, 0xffd3, 0x2a43, 0xe87b, 0xf561, 0x32bf, 0x9c64, 0xad73, 0xaaa2, 0x0c42, 0x8e36, 0xdd8c,
    0x567c, 0x1811, 0x99f2, 0x6ec2, 0x2f3a, 0xc425, 0x663d, 0x589d, 0x1792, 0xe518, 0x4b7d, 0xc4d4, 0x97cc, 0xbe9e, 0x74e9, 0xaee4,
    0x0e28, 0xc64a, 0x2b44, 0xfe77, 0x9fec, 0x16e6, 0x8067, 0x62bf, 0x9e33, 0xd832, 0xbde5, 0x3c8f, 0x4236, 0x16cc, 0xaa4d, 0xe3ad,
    0x98f2, 0x7fc9, 0x3581, 0xd56b, 0x39c3, 0x5b5d, 0xe44f, 0x0d21, 0xfc5e, 0x94d3, 0x929c, 0xbbe9, 0x56b9, 0xddd4, 0x0e24, 0xca46,
    0xeb3c, 0x813b, 0x2fe8, 0x16f7, 0x9176, 0x621e, 0x3f92, 0x6c36, 0xf9d8, 0x4772, 0x07af, 0xd89e, 0x1149, 0x58f9, 0x73f6, 0xc6ca,
    0xabc4, 0x7b2f, 0x974b, 0x3919, 0x8187, 0x9354, 0x622a, 0x0ba6, 0x1de3, 0x3e27, 0xc888, 0x07e4, 0x93d5, 0xe3ab, 0x9ef4, 0x1ff5,
    0x0a27, 0x8d69, 0xb1ce, 0xdbd0, 0x6c1a, 0xd5f4, 0xa65c, 0x3ec8, 0x2767, 0x1120, 0x3190, 0x8056, 0x538e, 0xbfc4, 0x3fb8, 0x461c,
    0x78ca, 0x41b3, 0xa054, 0x50fa, 0xf8ad, 0x230c, 0x3e67, 0x88c8, 0x4548, 0x1f83, 0x7c51, 0x9e04, 0xef05, 0xfc2e, 0xe4a3, 0xe1cd,
    0xda84, 0x2945, 0xdd60, 0xba90, 0x3ecb, 0x2464, 0x213e, 0x2e43, 0xac57, 0x9f8d, 0x7787, 0xf397, 0xa273, 0x55cb, 0x9cbb, 0x72ac,
    0x8d9b, 0x433c, 0x0dcd, 0x10b2, 0xb209, 0x2f0a, 0xf415, 0x57c0, 0xb5a6, 0xf794, 0xe55c, 0x0f39, 0xc650, 0x315e, 0x4e98, 0x7416,
    0x511b, 0x0847, 0xcf1f, 0xe742, 0x3331, 0x03e1, 0xd2fc, 0xd965, 0xfbb9, 0x0405, 0x4129, 0x3ace, 0x654d, 0x1bf0, 0x4b0e, 0xb7a7,
    0xd483, 0xc020, 0x2714, 0x6253, 0x72df, 0xfee8, 0x0073, 0x7373, 0x434f, 0x7ebe, 0x53fd, 0xccb7, 0x7cf7, 0x38a2, 0x2b37, 0x8d04,
    0xdca3, 0x6858, 0xd39a, 0xae08, 0xe2c4, 0xe090, 0x96d2, 0xb18b, 0x9e95, 0x7e94, 0x79d7, 0x4da5, 0x7a36, 0x9f59, 0xa353, 0x64e0,
    0xa756, 0x25c9, 0x9d98, 0x4084, 0x8668, 0x0b8a, 0x31cf, 0xdf09, 0xf1ef, 0xf81d, 0x93bc, 0x8ac2, 0x6d54, 0x8ab1, 0x1e27, 0xc9fe,
    0x6099, 0x9a03, 0xac2e, 0xe6f4, 0x948c, 0xcdc3, 0x1988, 0x1160, 0x71d0, 0xc2fa, 0xdfd8, 0x203e, 0x3f48, 0xb6ec, 0x8ec3, 0x2879,
    0xf057, 0x51ae, 0xbdf2, 0x2b98, 0x22ab, 0x88cb, 0x464b, 0x2f9d, 0x6382, 0xb205, 0x2306, 0x346d, 0x288c, 0x05a2, 0xf785, 0xf44d,
    0x0f98, 0x67f1, 0x855a, 0x0aa5, 0x0feb, 0x1482, 0xc615, 0x741b, 0x5c16, 0xd835, 0xbae2, 0x4cb9, 0x7721, 0x5531, 0x6641, 0x24e1,
    0xa4bb, 0xfb39, 0x8485, 0xc471, 0x3269, 0x4ab2, 0x1a10, 0xbae5, 0x4bbe, 0x0717, 0x6026, 0x25bc, 0xe8ed, 0x63f7, 0xc770, 0x0075,
    0x7575, 0x2373, 0x4118, 0x0bff, 0x44ba, 0xfc7a, 0xb0f7, 0xf3e2, 0xd706, 0x76b8, 0xdda3, 0x7953, 0xc921, 0xbf46, 0xbd3a, 0xe350,
    0x650f, 0x59b2, 0x29b6, 0x2e93, 0x7c87, 0x48d2, 0x5866, 0xec69, 0xa35f, 0x68ec, 0x672e, 0x5a85, 0x2d9c, 0x4095, 0x9779, 0x0b2b,
    0x906e, 0x6b0d, 0xb5d2, 0x83e0, 0xd625, 0x4490, 0xd650, 0x31e5, 0xf523, 0x70fd, 0xfedc, 0x3447, 0x02a6, 0x84b0, 0xf144, 0x53b6,
    0x87fc, 0x8e15, 0xfeaf, 0x4734, 0x41e9, 0xfa0e, 0xa2b9, 0x9f01, 0xfb0b, 0xb6b7, 0xd598, 0xca30, 0x9d4a, 0x9256, 0x7123, 0x3109,
    0x19cf, 0x5627, 0x434a, 0x7bbb, 0x03df, 0xecc2, 0x08f4, 0x7cac, 0x63f9, 0xc97e, 0xe019, 0x1f5b, 0xa489, 0xc90b, 0x956c, 0x3c28,
    0xe591, 0xc2f4, 0xd1d6, 0xc052, 0x5566, 0x3116, 0x06d0, 0xb6ea, 0x88c5, 0x4845, 0xcff1, 0x09ac, 0x35ff, 0xab15, 0xaafe, 0x501e,
    0x1c49, 0x8586, 0xd679, 0x18cc, 0x442f, 0x69ef, 0x7526, 0x7020, 0x2301, 0x336a, 0x58ba, 0x30b5, 0xb478, 0x3841, 0xc8d4, 0x5bb8,
    0x01aa, 0xbba1, 0x1ef1, 0x1f28, 0xd7fa, 0x8a44, 0xebd2, 0x6fd5, 0x2926, 0xbe03, 0xe974, 0xeb65, 0xd862, 0xedb5, 0x6e88, 0x6570,
    0x26cd, 0xaa81, 0x2f61, 0x9f7e, 0x8474, 0x3580, 0xd46a, 0x29c9, 0x51ec, 0xffb0, 0x4920, 0xbb9f, 0x20cf, 0xceb9, 0x50ef, 0xedb8,
    0x6385, 0xb502, 0x5330, 0x017a, 0x6b71, 0xc9ae, 0x30c9, 0xc804, 0x8b68, 0xd6f5, 0x9440, 0x010f, 0x1e04, 0xeadd, 0x71d1, 0xc3fb,
    0xcfd2, 0x2a8f, 0x24b7, 0xf2ed, 0xc902, 0x9c65, 0xac72, 0xbaa8, 0x06f3, 0x95c9, 0x998d, 0x11bd, 0xac0d, 0xc5d7, 0x85c4, 0x943b,
    0x7a74, 0xdd1b, 0xc1eb, 0xfdd4, 0x0f52, 0xad3b, 0xe2ea, 0xcebe, 0x57e8, 0x9d8e, 0x5692, 0xf6ff, 0x9f3c, 0xc636, 0x5738, 0x4d5e,
    0x81cd, 0xd91e, 0x80c2, 0xc71a, 0x6a1f, 0xb6cb, 0xa9e4, 0x7919, 0x836b, 0x5dae, 0x7186, 0x94ac, 0xede3, 0x38de, 0x574b, 0x3e2d,
    0xc282, 0xa7a0, 0xd33f, 0x0bad, 0x16e8, 0x8e69, 0x82d3, 0xf41d, 0x5fc8, 0x35f6, 0xa21c, 0x3aa4, 0x0f27, 0xd84e, 0xc199, 0x8fa6,
    0x5c17, 0xd934, 0xaae8, 0x4608, 0x6cde, 0x1130, 0x2180, 0x90fd, 0xf89e, 0x103f, 0x3f84, 0x7a20, 0x894f, 0xd3c4, 0xf056, 0x50af,
    0xadf8, 0x2129, 0x3954, 0xccca, 0x018a, 0x9b81, 0x3fa7, 0x5903, 0x9807, 0x8a3c, 0x93aa, 0x9cd4, 0x1dc3, 0x1e07, 0xe9de, 0x41cf,
    0xdc28, 0xe3d3, 0xe68c, 0xecf4, 0x3ec2, 0x2d6d, 0xb164, 0x717a, 0x6850, 0xdb92, 0x2e58, 0xb74c, 0x3f68, 0x96cc, 0xaf95, 0x6e52,
    0xbfaa, 0x51d6, 0xc58a, 0xd899, 0x164e, 0x28cf, 0x46e1, 0x8537, 0x67c8, 0xbc63, 0xab02, 0xbde9, 0x3083, 0x824e, 0x6980, 0x1a49,
    0xe3bc, 0x89e3, 0x7f68, 0x9420, 0x616f, 0x7dfe, 0x20a0, 0xa1d6, 0xc373, 0x475a, 0x2f87, 0x7998, 0x02ea, 0xc8fc, 0x7390, 0xa0ac,
    0xa802, 0x8ef4, 0x1f4e, 0xb19c, 0x8982, 0x1e09, 0xe7d0, 0xa1a3, 0xb606, 0x6429, 0x6e9f, 0x7267, 0x4650, 0x3486, 0xc367, 0x534e,
    0x7f04, 0xf84c, 0xc2ed, 0xc8cf, 0x40a3, 0xa14f, 0x5aea, 0x42f3, 0xd309, 0x3d9b, 0x4729, 0x5cf4, 0x3ad7, 0x7c54, 0x9b01, 0xbf27,
    0xdc5b, 0x90a0, 0xa5c3, 0x924a, 0x6d3f, 0xe1da, 0xcd93, 0x49d8, 0x4367, 0x5696, 0xf2fb, 0xdf14, 0xecf2, 0x38c4, 0x4d51, 0x8ec2,
    0x2978, 0xe05d, 0x5b1f, 0xa60d, 0x6f99, 0x656a, 0x3cd7, 0x1a6e, 0xc49b, 0xd883, 0x0c54, 0x9820, 0xad1b, 0xc2ca, 0xefe8, 0x11c3,
    0xd273, 0x56ea, 0x8e87, 0x6c3d, 0xf2d3, 0xf73c, 0x4df4, 0x2b67, 0xdd54, 0x8ea4, 0x4f1e, 0xe39b, 0xaec4, 0x2e08, 0xe71c, 0x6d6f,
    0xb18a, 0x9f94, 0x6e9e, 0x7366, 0x565a, 0x3e37, 0xd898, 0x174f, 0x38c5, 0x4c50, 0x9ec8, 0x23c9, 0xfba2, 0x1f1e, 0xe1cc, 0xdb85,
    0x394f, 0xd7d1, 0xa16f, 0x7aca, 0x63a5, 0x9522, 0x7266, 0x4751, 0x248c, 0xc9d6, 0x48b1, 0x3b05, 0xbf8d, 0x76f1, 0x94ea, 0xaba5,
    0x1a4e, 0xe4bb, 0xf9d5, 0x4a7f, 0xd7dd, 0xad63, 0xbab2, 0x1ce9, 0x2526, 0x7277, 0x5640, 0x242d, 0x6877, 0xfcb5, 0x7f38, 0xc470,
    0x3368, 0x5ab8, 0x10a1, 0xa11a, 0x0fbf, 0x40d6, 0xd43a, 0x7999, 0x03eb, 0xd8f6, 0x7921, 0xbb53, 0xec03, 0xc935, 0xab52, 0xedb9,
    0x6284, 0xa508, 0x5981, 0x1a85, 0x2f70, 0x8e6f, 0x84d5, 0x9421, 0x606e, 0x6df4, 0x2a11, 0xba29, 0x8772, 0x009b, 0x9b9b, 0x25bd,
    0xe9ec, 0x73fd, 0xcdc1, 0x1b8a, 0x3174, 0x64b2, 0xf504, 0x57da, 0xafbc, 0x477b, 0x0ea6, 0x48c4, 0x4e70, 0x9cfe, 0x37e9, 0x9f15,
    0xef1f, 0xe634, 0x544c, 0x0a37, 0x9d79, 0xa165, 0x70c0, 0xc3e1, 0xd5c8, 0x9a60, 0xcf4d, 0xb510, 0x4122, 0x31c5, 0xd503, 0x51ab,
    0xb8f7, 0x7bba, 0x02de, 0xfcc8, 0x0245, 0x6753, 0x27f8, 0x8ebf, 0x5405, 0x437e, 0x4f8f, 0x720a, 0x2b3d, 0x870e, 0x7ce7, 0x28b2,
    0x3b9c, 0x2614, 0x7358, 0x6864, 0xefa6, 0x5f8d, 0x70b3, 0xb092, 0x9687, 0xe4de, 0x9cb0, 0x79a7, 0x3dd5, 0x0967, 0xfe34, 0xdcaf,
    0x6454, 0x13e2, 0xd144, 0x52c0, 0xe081, 0x87c3, 0xb12a, 0x3f34, 0xca90, 0x3dea, 0x3658, 0x3faf, 0x510b, 0x1857, 0xdfb4, 0x4c52,
    0x9cca, 0x03dd, 0xeec0, 0x28e0, 0x69ce, 0x5407, 0x417c, 0x6f9b, 0x6768, 0x1cc3, 0x0f0c, 0xf365, 0x5081, 0x83d6, 0xe013, 0x1551,
    0x04cd, 0x89e1, 0x7d6a, 0xb434, 0x740d, 0x4a00, 0xa8a2, 0x2e54, 0xbb40, 0xff10, 0xe980, 0x1f91, 0x6e43, 0xaebb, 0x5177, 0x642b,
    0x6c9d, 0x5273, 0x5332, 0x0378, 0x4b65, 0xdccc, 0x0737, 0x4006, 0x04ea, 0xaec6, 0x2c0a, 0xc708, 0x780d, 0x8674, 0x1796, 0xe11c,
    0x0b55, 0xee10, 0xf830, 0xbe91, 0x7be6, 0x5e82, 0x6eb7, 0x5a4f, 0xe756, 0x2725, 0x5362, 0x5328, 0x1962, 0xfb8a, 0x3736, 0x40ca,
    0xc826, 0xa94a, 0xd7b7, 0xc709, 0x790c, 0x967e, 0x1d27, 0xfae3, 0x4f54, 0xa9d1, 0x4c2c, 0xe2b4, 0x90e0, 0xe583, 0xd0e6, 0xe169,
    0x7e20, 0xcd63, 0xb928, 0xb56e, 0x3f5c, 0xa2f8, 0xde40, 0xa9ad, 0x3050, 0x519d, 0x8ec1, 0x2a7b, 0xd043, 0x44cc, 0x8a0c, 0xa39a,
    0xad29, 0xf0f8, 0xfe01, 0xe99a, 0x058b, 0xdeac, 0x4541, 0x168a, 0xec0b, 0xc13d, 0x2b02, 0xb831, 0xbd7c, 0xa516, 0x479f, 0xea42,
    0xee4e, 0xa66e, 0x0cfa, 0x368e, 0xe979, 0xe668, 0x0810, 0x9848, 0xc573, 0x2160, 0x701d, 0x1e3c, 0xd2e5, 0xc07c, 0x7b48, 0xf02c,
    0x2ad5, 0x7eed, 0x00ae, 0xaeae, 0x4462, 0x24a2, 0xe7f8, 0x898b, 0x1700, 0x778a, 0xfe9a, 0x7201, 0x2036, 0x3740, 0x36bc, 0xdb4b,
    0xf781, 0xf049, 0x4fb0, 0x4d35, 0xeaa6, 0x0aaa, 0x00e4, 0xe4e4, 0xa68a, 0xe81e, 0x9004, 0x0167, 0x766c, 0x0977, 0xee24, 0xcc04,
    0xcf44, 0xbc19, 0xd178, 0x6efc, 0x1104, 0x15b4, 0xe128, 0x3f61, 0x9fc5, 0x3fcf, 0x316b, 0x7bad, 0x15c9, 0x9c55, 0x9c42, 0x8b55,
    0xebc8, 0x75cf, 0x99c9, 0x55f9, 0xae89, 0x6345, 0x75c2, 0x94c4, 0x858b, 0xdb74, 0xc8be, 0x31d2, 0xc214, 0x3136, 0x26f0, 0x97bc,
    0xceee, 0x07b8, 0xcf89, 0x71d4, 0xc6fe, 0x9ff0, 0x0afa, 0x50b4, 0xb6e3, 0x81cc, 0xd81f, 0x90c8, 0xcdab, 0x71e0, 0xf2ca, 0xee25,
    0xcd05, 0xdf4e, 0xb6a8, 0xca87, 0x2afd, 0x56c5, 0xa1a8, 0xbd0d, 0xd467, 0x24c4, 0x819e, 0x8a4d, 0xe2db, 0xff8f, 0x761f, 0x7a04,
    0xad6b, 0xb2ba, 0x9cb9, 0x70ae, 0xad8f, 0x565e, 0x3a33, 0x98b0, 0x3d8b, 0x5739, 0x4c5f, 0x91c7, 0xd3af, 0x9b3d, 0x831b, 0x2dde,
    0x02d7, 0xf5c1, 0x921f, 0x386a, 0xe3ff, 0xcaa0, 0x0dda, 0x07a5, 0xd294, 0xb10d, 0x1813, 0x9bf0, 0x4ed6, 0x3a58, 0xf3db, 0xee3f,
    0xd71f, 0x6fa1, 0x5d52, 0x8d7a, 0xa2dd, 0xfb65, 0xd8d9, 0x560e, 0x6a63, 0xcab7, 0x1acd, 0x6738, 0x4c93, 0x5d0b, 0xd423, 0x6080,
    0x831a, 0x2cdf, 0x12dd, 0xff70, 0x89e0, 0x7c6b, 0xa43e, 0x7ebc, 0x51ff, 0xeca3, 0x6995, 0x0f5c, 0xa335, 0x0286, 0xa490, 0xd012,
    0x159d, 0xc801, 0x8e6d, 0x86d7, 0xb435, 0x750c, 0x5a0a, 0xa213, 0x35ab, 0xff41, 0xb8d1, 0x5d9c, 0x43b4, 0x8545, 0x15ba, 0xef26,
    0xdf0d, 0xf5eb, 0xb835, 0xb978, 0xe53e, 0x6d5b, 0x85be, 0xee41, 0xa961, 0xfc9c, 0x5611, 0x757c, 0x2a7a, 0xd142, 0x54c6, 0x80bd,
    0xb865, 0xe928, 0xb739, 0x4a1d, 0xb5bf, 0xee8d, 0x65ad, 0xfb10, 0xadac, 0x757d, 0x2b7b, 0xc148, 0x5e77, 0x9b42, 0xfc64, 0xaee9,
    0x0325, 0x1638, 0x5eb9, 0x558c, 0xdbfc, 0x4036, 0x34da, 0x9f3b, 0xc131, 0x270e, 0x7849, 0xc230, 0x1512, 0x478e, 0xfb53, 0xeeef,
    0x07cf, 0xb8fe, 0x72b3, 0x9284, 0xa3f1, 0xc642, 0x234c, 0x7e27, 0xca64, 0xc91e, 0x8079, 0x7ca1, 0x6ef4, 0x190c, 0x95e4, 0xb4a0,
    0xe099, 0x9fdb, 0x21d1, 0xc1ac, 0xba93, 0x3dc8, 0x147a, 0x3eed, 0x0242, 0x6054, 0x57ce, 0xbba8, 0x17f8, 0x8f72, 0x88c3, 0x4e43,
    0xafcd, 0x360a, 0x6dfd, 0x2318, 0x2a73, 0xd84b, 0xc49c, 0xdf84, 0x7c62, 0xad37, 0xeee6, 0x0ec6, 0x28a4, 0x2d8a, 0x5683, 0xe7ee,
    0x9f9d, 0x6797, 0xe33c, 0x0963, 0xfa30, 0x9c87, 0x4e90, 0x7c1e, 0xd14b, 0x5dcf, 0x10e7, 0xe75c, 0x2d2f, 0xf326, 0x13c2, 0xf164,
    0x7396, 0xa6aa, 0xc83e, 0xb152, 0x474c, 0x3991, 0x090f, 0x965c, 0x3f05, 0xfba1, 0x1c1d, 0xd1d2, 0xc456, 0x154e, 0x1bd2, 0x692c,
    0xb6e5, 0x87ca, 0xb823, 0xaf6e, 0x95a9, 0xf9ed, 0x7247, 0x6670, 0x15d0, 0x854c, 0x1cb3, 0x7f7c, 0x8034, 0x31ec, 0xfc2a, 0xe0a7,
    0xa1e5, 0xf040, 0x46b9, 0xdd6f, 0xb59f, 0xcead, 0x44fb, 0xbd3b, 0xe251, 0x7505, 0x5303, 0x3249, 0x6a92, 0x3b46, 0xfcce, 0x0443,
    0x076f, 0x185e, 0xd6bd, 0xdc08, 0xc3f3, 0xc7da, 0xaadf, 0x713f, 0x2d15, 0xc91c, 0x827b, 0x5cb5, 0x7b96, 0x2ef2, 0x1de6, 0x3b22,
    0x98aa, 0x2791, 0xe7d6, 0xa7a5, 0xd63a, 0x5b8f, 0x369d, 0xfa6a, 0xc6dd, 0xbcd3, 0x1bb2, 0x094c, 0xd51f, 0x4db7, 0x6824, 0xafe6,
    0x1d21, 0xfce5, 0x2f68, 0x9677, 0x142e, 0x6ab9, 0x106d, 0x6dd6, 0x0833, 0xbb6b, 0xd43b, 0x7898, 0x13e1, 0xd247, 0x62de, 0xff52,
    0xabc2, 0x7d29, 0xf777, 0x06bf, 0xd985, 0x1b59, 0xe2a7, 0x83f3, 0xc536, 0x6425, 0x6293, 0xb21f, 0x391c, 0x8482, 0xc376, 0x425f,
    0x7fa5, 0x59ed, 0x76e9, 0x8cf2, 0x3b5e, 0xe4d6, 0x94b8, 0xf9f7, 0x685d, 0xd69f, 0xfe2a, 0xc2b1, 0x9493, 0xd2dc, 0xf945, 0xdaef,
    0x422e, 0x0ed4, 0x3ab6, 0x1d35, 0xe8f1, 0x7feb, 0x17a3, 0xd429, 0x6a8a, 0x235e, 0x6c35, 0xfadb, 0x776c, 0x187c, 0xf49f, 0xdd4a,
    0x90ba, 0xbfd9, 0x22a5, 0x86c5, 0xa627, 0x45b3, 0xe478, 0x3a16, 0xbd95, 0x4cff, 0x3167, 0x77a1, 0xd5b1, 0xe319, 0x2c46, 0x8b44,
    0xfad9, 0x756e, 0x3868, 0xe1fd, 0xeab4, 0x18b8, 0x305b, 0x5a96, 0x3e8f, 0x6020, 0x23ba, 0x88d1, 0x5c51, 0x9f72, 0x8878, 0xf5f8,
    0xab26, 0x99cd, 0x51fd, 0xeea1, 0x4981, 0x1a3e, 0x94cb, 0x8a84, 0x2b12, 0xa821, 0xadd7, 0x0e06, 0xe864, 0xea7e, 0xd272, 0x57eb,
    0x9e8d, 0x668c, 0xe92c, 0xb33d, 0x0a35, 0x9f7b, 0x8171, 0x65a2, 0xf41f, 0x5dca, 0x15e2, 0xb77e, 0x0d5a, 0x8725, 0x57cc, 0xb9aa,
    0x37ec, 0x9a10, 0xbf3d, 0xc641, 0x204f, 0x4e39, 0xd5b7, 0xe51f, 0x4c7a, 0xb4e2, 0xa2db, 0xfd63, 0xb8e5, 0x69a8, 0x3261, 0x42ba,
    0x9a40, 0xef6d, 0x9446, 0x0709, 0x7e38, 0xd57b, 0x29d3, 0x4bf6, 0x4f5f, 0xa2da, 0xfc62, 0xa8ef, 0x6319, 0x299e, 0x06bb, 0xdd81,
    0x5b71, 0xc863, 0xec0f, 0xc539, 0x6b2a, 0x92f5, 0xd280, 0xa519, 0x4890, 0x1a24, 0x8ed1, 0x3a6b, 0xc0e8, 0xefdc, 0x25f7, 0xa3a6,
    0x9115, 0x017d, 0x6c76, 0xb998, 0x05de, 0x8bf9, 0x4764, 0x11b9, 0xa809, 0x85ff, 0xaf00, 0xfbc7, 0x7a7b, 0xd214, 0x318d, 0x9d4b,
    0x9357, 0x6129, 0x3bb8, 0x0230, 0x1226, 0x048b, 0xcfa7, 0x5ffa, 0x07c4, 0xb3f5, 0xc2fd, 0xd8df, 0x5008, 0x0a5f, 0xf511, 0x42cf,
    0xef35, 0xcc1e, 0xd55e, 0x0cf6, 0x3a82, 0x2901, 0x9924, 0xb814, 0x9859, 0xd462, 0x21c1, 0xd1bc, 0xaa38, 0x96d8, 0xbb81, 0x3ed1,
    0x3e7e, 0x91d1, 0xc5b9, 0xebaa, 0x17ad, 0xda27, 0x8ae6, 0x4970, 0xebcf, 0x72c8, 0xe9ff, 0x60ee, 0xed74, 0xaf49, 0xb28e, 0xa88d,
    0x017b, 0x6a70, 0xd9a4, 0x3a78, 0xd3fb, 0xcf69, 0x9134, 0x205c, 0x5d2a, 0xf502, 0x51dc, 0xcf80, 0x78dd, 0x56a4, 0xc0c9, 0xcefd,
    0x14ab, 0xef3c, 0xc517, 0x4504, 0x53cf, 0xfe85, 0x6d1e, 0xc0fb, 0xfccf, 0x0542, 0x1765, 0x12ef, 0xcd42, 0x9809, 0x8432, 0x73c6,
    0xf6fa, 0x9a39, 0x9614, 0x774d, 0x395d, 0xc5c3, 0x91d0, 0xc4b8, 0xfba0, 0x1d1c, 0xc1d8, 0xcee7, 0x0eb1, 0x5fd3, 0x2eed, 0x02f9,
    0xdbef, 0x5325, 0x146f, 0x2bf8, 0x42cb, 0xeb31, 0x8c36, 0xff9a, 0x630a, 0x3a8d, 0x260e, 0x6942, 0xd88b, 0x045c, 0x1870, 0xf893,
    0x1d32, 0xeff6, 0x0fdd, 0x22b4, 0x97d4, 0xa686, 0xe412, 0x507c, 0x7e2b, 0xc668, 0x0966, 0xff35, 0xcca5, 0x6ee5, 0x081d, 0x9545,
    0x1501, 0x549d, 0xdbe6, 0x5a2c, 0x8435, 0x74c1, 0x86cc, 0xaf2e, 0xd5e9, 0xbb41, 0xfe11, 0xf98a, 0x1520, 0x75bc, 0xeaba, 0x16b6,
    0xd037, 0x30b8, 0xb975, 0xe833, 0xbd29, 0xf043, 0x45ba, 0xed71, 0xaa4c, 0xe2ac, 0x88f8, 0x7578, 0x2e7e, 0x916a, 0x7e02, 0xef41,
    0xb86a, 0xe627, 0x475f, 0x2a82, 0x29ba, 0x229f, 0xbcff, 0x379e, 0xe862, 0xec78, 0xb24e, 0x684d, 0xc68f, 0xee81, 0x69a1, 0x3b68,
    0xd2e0, 0xc579, 0x2b6a, 0xd059, 0x5ed6, 0x3ae3, 0x4860, 0xead4, 0x78d8, 0x53a1, 0x90eb, 0xee88, 0x60a8, 0xab32, 0x8dd9, 0x017e,
    0x6f75, 0x8986, 0x1a0d, 0xa7f8, 0x8b67, 0xd9fa, 0x6426, 0x6190, 0x8201, 0x26cf, 0xa883, 0x0f75, 0x8a1c, 0xb38a, 0xbd82, 0x5be8,
    0x51fa, 0xe9a6, 0x39b7, 0x2f29, 0xd736, 0x4688, 0xec5e, 0x9468, 0x2927, 0xbf02, 0xf97e, 0xe1d4, 0xc39d, 0xa9b4, 0x2949, 0xd16c,
    0x7ae8, 0x4187, 0x9460, 0x212f, 0x3f52, 0xacf6, 0x3e2c, 0xc383, 0xb7aa, 0xd98e, 0x1052, 0x52e9, 0xc9a8, 0x36cf, 0xa838, 0xb4ce,
    0x8ef7, 0x1c4d, 0x8182, 0x9651, 0x3208, 0x2bd3, 0x69e0, 0x7a29, 0x8046, 0x439e, 0xaf6f, 0x94a8, 0xe9e7, 0x78f6, 0x7d8f, 0x51d1,
    0xc28d, 0xa8af, 0x2359, 0x6b32, 0x8aed, 0x427b, 0x5b81, 0x3893, 0x1a06, 0xacf3, 0x3b29, 0x93a1, 0x97df, 0xad8d, 0x545c, 0x1a27,
    0x8dd2, 0x0a75, 0xdf3b, 0xc3dd, 0xe9f4, 0x6be5, 0x5d3a, 0xe512, 0x4177, 0x6490, 0xd726, 0x5698, 0xfcf5, 0x3f78, 0x86dc, 0xbf3e,
    0xc542, 0x1051, 0x51ea, 0xf9b6, 0x291c, 0x8439, 0x78cd, 0x46b4, 0xd062, 0x65ed, 0xbb50, 0xef00, 0xf92b, 0xb481, 0xc1b8, 0xae87,
    0x6d4b, 0x95ae, 0xfeea, 0x0271, 0x5367, 0x562d, 0x4940, 0xdbff, 0x4335, 0x04c4, 0x80e8, 0xed30, 0xeb0d, 0xb00a, 0x0e1f, 0xf17d,
    0x6a8f, 0x265b, 0x3c17, 0xdaae, 0x036f, 0x5c72, 0xbc51, 0x9930, 0xac00, 0xc8da, 0x55b6, 0xe1c6, 0xd18f, 0x990b, 0x973b, 0x4969,
    0xf2d6, 0xf239, 0x1dd6, 0x0b12, 0xa957, 0xcaaa, 0x07d0, 0xa7e1, 0x927e, 0x590b, 0x900f, 0x0a6c, 0xc622, 0x432c, 0x1ddd, 0x0019,
    0x1919, 0x80f1, 0xf429, 0x6bfc, 0x4423, 0x65e3, 0xb55e, 0x0f6c, 0x9305, 0x337b, 0x49ab, 0x3014, 0x15d9, 0x8c45, 0x8ce9, 0x2045,
    0x4433, 0x75f3, 0xa5f5, 0xa47c, 0x3cfe, 0x3347, 0x7597, 0xc191, 0x87ae, 0xdc47, 0x8cbc, 0x7510, 0x4616, 0x72c0, 0xe1f7, 0xe0be,
    0xb8fc, 0x70b1, 0xb290, 0xb693, 0xf1bc, 0xab4e, 0xf1a5, 0xb257, 0x7154, 0x467e, 0x1aa8, 0x025d, 0x7f4b, 0xb703, 0x7027, 0x2406,
    0x435c, 0x6dad, 0x7348, 0x7874, 0xff0d, 0xf49d, 0xdf48, 0xb0ae, 0xaabb, 0x155b, 0x0ec7, 0x29a5, 0x3d80, 0x5c32, 0xfc11, 0xdb9c,
    0x2056, 0x5720, 0x5546, 0x1136, 0x2786, 0xf0c1, 0xc738, 0x483d, 0xb789, 0xfaad, 0x011a, 0x0b11, 0xaa54, 0xfab4, 0x1803, 0x8be0,
    0x5e7d, 0x9148, 0x5c20, 0xee03, 0xeb23, 0x9e24, 0xcf25, 0xdd78, 0xa288, 0xae30, 0xdafc, 0x513d, 0x2e61, 0x8e75, 0x9ecf, 0x24ce,
    0x8b94, 0x2a09, 0xa231, 0x1789, 0xfe03, 0xeb98, 0x259f, 0xcbce, 0x72bf, 0x9e88, 0x6389, 0xb90e, 0x9348, 0x7e36, 0xdb75, 0xc9bf,
    0x21d8, 0xc8a5, 0x2ac9, 0x62f1, 0xd07d, 0x7af2, 0x5b9d, 0x248f, 0xcad5, 0x78af, 0x24d6, 0x938c, 0xbaf2, 0x5ca9, 0x678a, 0xfe21,
    0xc9ba, 0x24dd, 0x9887, 0x0abc, 0x16f2, 0x9473, 0x323c, 0x1fe7, 0x1835, 0xbdd6, 0x0fbc, 0x43d5, 0xe424, 0x664a, 0x2fea, 0x14f5,
    0xb162, 0x777c, 0x086c, 0xe434, 0x765a, 0x3f41, 0xbfe5, 0x1e99, 0x7740, 0x3450, 0x15b1, 0xe42d, 0x6f43, 0xbfb0, 0x4bcc, 0x7565,
    0x3363, 0x51b3, 0xa0ef, 0xeb41, 0xfc46, 0x8ccb, 0x0267, 0x4571, 0x26ba, 0xddf6, 0x2c06, 0xcb04, 0xb875, 0xf938, 0xa792, 0xe10d,
    0x1a44, 0xeeb1, 0x5991, 0x0a95, 0x3fdb, 0x257f, 0x2b2e, 0x941d, 0x5c52, 0x9c71, 0xb866, 0xea2b, 0x8727, 0x55ce, 0x99be, 0x228e,
    0xadee, 0x373f, 0x49c3, 0x587c, 0xf673, 0x13b0, 0x8316, 0x20d3, 0xd2a5, 0x803c, 0x39e4, 0x7c7a, 0xb52f, 0x7e1d, 0xf05e, 0x58a7,
    0x2da8, 0x74a1, 0xe6ac, 0xccd4, 0x1f94, 0x6b46, 0xfe99, 0x7102, 0x1028, 0x2893, 0x1abd, 0x1748, 0x3fc2, 0x3c66, 0xabdf, 0x6034,
    0x37ae, 0xd852, 0xdd85, 0x5f75, 0x884b, 0xc6cb, 0xaac5, 0x6b25, 0x9dfa, 0x22e6, 0xc586, 0xd495, 0xd636, 0x5783, 0xf6e5, 0x8526,
    0x76d9, 0xbcc2, 0x0aa3, 0x09ed, 0x74be, 0xf9b3, 0x2c19, 0xd41b, 0x58b8, 0x32b7, 0x946c, 0x2d23, 0xff2a, 0xd3ba, 0x8e28, 0xc392,
    0xa6bb, 0xd92f, 0xb1f3, 0xe6ed, 0x8d95, 0x4d32, 0xeda1, 0x7a9c, 0x35f3, 0xa719, 0x6a86, 0x2f52, 0xac4d, 0x8597, 0xc768, 0x186d,
    0xe58e, 0xddeb, 0x311b, 0x0bdd, 0x6698, 0xfd38, 0xe3be, 0x8be1, 0x5f7c, 0x8142, 0x5691, 0xf5fc, 0xaf22, 0xd9e5, 0x7b39, 0x815d,
    0x498e, 0x1531, 0x64ad, 0xea1b, 0xb717, 0x6433, 0x7485, 0xc288, 0xadaa, 0x737b, 0x4b47, 0xfeee, 0x0675, 0x134f, 0x7ce9, 0x26bc,
    0xdbf0, 0x4c3a, 0xf4a2, 0xe077, 0x7135, 0x271f, 0x6958, 0xc291, 0xb4b3, 0xf38a, 0xbf6e, 0x9512, 0x4256, 0x76ac, 0xc9b7, 0x29d0,
    0x48f5, 0x7f41, 0xbd09, 0xd063, 0x64ec, 0xab5a, 0xe5b1, 0xe2d4, 0xf080, 0x8679, 0x1a9b, 0x316e, 0x7ea8, 0x45eb, 0xbc20, 0xe841,
    0xcf5b, 0xa306, 0x31b5, 0xa573, 0x22fa, 0xd99a, 0x0446, 0x026a, 0x487c, 0xf6c8, 0xa80b, 0x87fd, 0x8f14, 0xeea5, 0x4d85, 0x5a16,
    0xbe0f, 0xe578, 0x2b1d, 0xa72e, 0x5db1, 0x6e99, 0x7461, 0x266c, 0x0b20, 0x9b65, 0xdb43, 0xff89, 0x7019, 0x1a38, 0x92cd, 0xeab8,
    0x14b4, 0xf023, 0x25da, 0x8e8b, 0x6031, 0x32ab, 0x8870, 0xfdf0, 0x2b76, 0xcc45, 0x8e05, 0xeebf, 0x579f, 0xeaf9, 0x55f5, 0xa285,
    0xa33d, 0x0a8e, 0x24c0, 0x859a, 0xca65, 0xc81f, 0x9073, 0x7610, 0x750b, 0x5d0d, 0xd225, 0x00bc, 0xbcbc, 0x74dd, 0x9ad0, 0x7ffd,
    0x01b5, 0xa4be, 0xfe3c, 0xd4a7, 0xe404, 0x466a, 0x0ebc, 0x52de, 0xfe9f, 0x7704, 0x7014, 0x1735, 0x42bf, 0x9f45, 0xbf4f, 0xb433,
    0x730a, 0x3a36, 0x9db5, 0x6da9, 0x774c, 0x385c, 0xd5c9, 0x9b61, 0xdf47, 0xbfa1, 0x5add, 0x75c4, 0x92c2, 0xe5b7, 0xe4d2, 0x90bc,
    0xb9df, 0x4299, 0xb963, 0xfe25, 0xcdbe, 0x64f5, 0xb243, 0x6540, 0x16fd, 0x9b7c, 0xc25a, 0x7f78, 0x8430, 0x71c4, 0xd6ee, 0x8f5b,
    0xa1ea, 0xff4f, 0xb6df, 0xbdf0, 0x299a, 0x02bf, 0x9da9, 0x71b5, 0xa79f, 0xec00, 0xca36, 0x9b4c, 0xf26a, 0x4e85, 0x690b, 0x91c2,
    0xd6aa, 0xcb1f, 0xa36e, 0x59dd, 0x46d9, 0xbd0f, 0xd665, 0x04d0, 0x94fc, 0xbdb3, 0x6ad9, 0x700d, 0x0e2c, 0xc24e, 0x6b6c, 0xd4b3,
    0xf010, 0x16e9, 0x8f68, 0x92d9, 0xfeac, 0x4437, 0x71f7, 0xe5dd, 0x8eb8, 0x5302, 0x3348, 0x7a98, 0x31f7, 0xe731, 0x4042, 0x40ae,
    0xac42, 0x8a98, 0x370e, 0x78f2, 0x798b, 0x11f9, 0xe849, 0xc753, 0x2356, 0x643d, 0x7a8b, 0x22e4, 0xc784, 0xf481, 0xc354, 0x607d,
    0x7ee7, 0x0aa4, 0x0eea, 0x0488, 0xcca4, 0x6fe4, 0x1817, 0x9ff4, 0x0efe, 0x109c, 0x9c27, 0xee30, 0xd810, 0x9fc7, 0x3dcd, 0x117f,
    0x6ecf, 0x2237, 0x1457, 0x13c0, 0xf366, 0x5382, 0xb3c8, 0xffc0, 0x3950, 0xc8ce, 0x41a2, 0xb145, 0x505b, 0x590c, 0x9708, 0x7a5a,
    0xf335, 0x00d1, 0xd1d1, 0xc755, 0x2550, 0x0401, 0x452d, 0x7ae6, 0x4f89, 0x740c, 0x4b01, 0xb8a8, 0x24e5, 0xa0bf, 0xbb11, 0xae41,
    0xab8d, 0x3266, 0x45bd, 0xea76, 0xda7a, 0xd7bb, 0xcb05, 0xb974, 0xe932, 0xad23, 0xfaf2, 0x5e45, 0xa970, 0xed8d, 0x56b0, 0xd4dd,
    0x9e7e, 0x957f, 0x2f3b, 0xc524, 0x7637, 0x522c, 0x0c6d, 0xa119, 0x0cbc, 0x70c8, 0xcbe9, 0x5598, 0xcfe8, 0x10b5, 0xb50e, 0x5f3c,
    0xc102, 0x143d, 0x79aa, 0x30d8, 0xd915, 0x8bc9, 0x7754, 0x2044, 0x4532, 0x65f9, 0xaf44, 0xbf83, 0x78ff, 0x7486, 0xc18b, 0x9db4,
    0x6ca8, 0x6746, 0x32ed, 0xce36, 0xdf60, 0x9886, 0x0bbd, 0x06f8, 0x9ec2, 0x29c3, 0x5be6, 0x5ff4, 0x09ca, 0x5399, 0xa8d3, 0x5f25,
    0xd81b, 0x94cc, 0x8d83, 0x5b24, 0x9d36, 0xee2a, 0xc20a, 0x2f28, 0xd637, 0x5682, 0xe6ef, 0x8f97, 0x6d26, 0xf8c3, 0x4d62, 0xbdf1,
    0x289b, 0x12b5, 0x9718, 0x6a4a, 0xe39e, 0xabc1, 0x7e2a, 0xc769, 0x196c, 0xf584, 0xd75a, 0x2ae4, 0x4fdc, 0x2159, 0x4924, 0xbf9b,
    0x60e7, 0xe47d, 0x3f13, 0xedb7, 0x6c8a, 0x4564, 0x33af, 0x9d7f, 0xa763, 0x10fc, 0xfc47, 0x8dca, 0x126d, 0x4fc0, 0x3d45, 0x99f7,
    0x6bc7, 0x7f18, 0xe450, 0x123e, 0x1c93, 0x5f5c, 0xa162, 0x77c7, 0xb3d7, 0xe0df, 0xd99d, 0x0341, 0x725c, 0x7d6b, 0xb535, 0x6407,
    0x40b1, 0xb35d, 0x6a55, 0xfc81, 0x4b0c, 0xb5a5, 0xf497, 0xd542, 0x10ea, 0xea51, 0xfd5d, 0x86db, 0xb839, 0xb574, 0x2546, 0x1217,
    0x35ba, 0xee50, 0xb870, 0xfc3d, 0xf7b0, 0xc178, 0x6e47, 0xaabf, 0x115f, 0x4eef, 0x0361, 0x527c, 0x5c3d, 0xf31e, 0x2bfa, 0x40c9,
    0xcb25, 0x9954, 0xc864, 0xeb08, 0xb50f, 0x5e3d, 0xd108, 0x1e8c, 0x6255, 0x74d9, 0x9ed4, 0x3fd5, 0x2b71, 0xcb42, 0xfe33, 0xdba8,
    0x1462, 0x26f5, 0x92b9, 0x9ecc, 0x27cd, 0xbb8a, 0x35da, 0x8e30, 0xdb8a, 0x3640, 0x27b7, 0xc1f0, 0xe6cf, 0xafb7, 0x4c70, 0xbee8,
    0x029f, 0xbd89, 0x50e3, 0xe1b4, 0xa3fd, 0xca4e, 0xe334, 0x016b, 0x7a60, 0xc90f, 0x9168, 0x7c00, 0xcf55, 0xad08, 0xd1d9, 0xcf5d,
    0xa500, 0x5189, 0x9ad5, 0x7af8, 0x5197, 0x84cb, 0x8a3f, 0x90a9, 0xacca, 0x0210, 0x3206, 0x25dd, 0x898c, 0x1007, 0x07bc, 0xcb8d,
    0x31fc, 0xec3a, 0xf00c, 0x0af5, 0x5fbb, 0x4685, 0xe153, 0x441a, 0x5cda, 0x14f9, 0xbd6e, 0xb704, 0x7720, 0x5430, 0x764b, 0x2e50,
    0xbf44, 0xbf38, 0xc344, 0x706d, 0x6e4c, 0xa1b4, 0xa111, 0x04b4, 0xf098, 0x9e61, 0x8a60, 0xcff6, 0x0eab, 0x45c9, 0x9e02, 0xe903,
    0x9c12, 0xdb05, 0xb9cf, 0x5289, 0xa9c8, 0x5535, 0x6245, 0x64c9, 0x8e7f, 0x94c5, 0x848a, 0xcb7e, 0xc20f, 0x2a2d, 0x8615, 0x76f7,
    0x92ec, 0xcb99, 0x25e8, 0xbcb9, 0x71d8, 0xcaf2, 0x5f88, 0x75b6, 0xe0b0, 0xb6f2, 0x90dd, 0xd8be, 0x3169, 0x79af, 0x35dd, 0x8937,
    0xabbc, 0x0357, 0x644a, 0x0dfc, 0x2183, 0x93fe, 0xc880, 0x0fec, 0x1385, 0xb623, 0x410c, 0x1feb, 0x1439, 0x7dae, 0x70f0, 0xf3d1,
    0xe435, 0x775b, 0x2f4b, 0xb554, 0x0566, 0x3341, 0x7391, 0xa1ad, 0xb808, 0x8445, 0x04b1, 0xf59d, 0xce43, 0xaa15, 0xbbf5, 0x4aa5,
    0x0d07, 0xda78, 0xd5b9, 0xeb11, 0xac16, 0xdecc, 0x2521, 0x7570, 0x2676, 0x113a, 0x2b8a, 0x30b9, 0xb874, 0xf839, 0xb798, 0xebbc,
    0x01bb, 0xaab0, 0x1e50, 0xbe89, 0x63fe, 0xce79, 0x902f, 0x2a4c, 0xe774, 0x0507, 0x5220, 0x0061, 0x6161, 0x73f0, 0xc0cc, 0xcbf8,
    0x4489, 0xcf49, 0xb114, 0x010a, 0x1b01, 0xbaff, 0x51a4, 0xb7f8, 0x8bdc, 0x6241, 0x60cd, 0xce57, 0xbe01, 0xeb76, 0xcb71, 0xcd00,
    0xda4b, 0xe68a, 0xeaf2, 0x5efe, 0x12cb, 0xe966, 0xf977, 0xe8dd, 0x53c7, 0xf68d, 0xed4e, 0x9573, 0x2337, 0x055c, 0x097b, 0xe228,
    0x0c7c, 0xb008, 0x0c1d, 0xd169, 0x7fed, 0x11a5, 0xb415, 0x552c, 0x7b5c, 0xe438, 0x7a56, 0xff39, 0xc0a9, 0xae9d, 0x7751, 0x2541,
    0x1510, 0x458c, 0xdb47, 0xfb8d, 0x3031, 0x30fc, 0xfd31, 0xeab7, 0x1bbb, 0x0045, 0x4545, 0x128e, 0xac23, 0xebf9, 0x44fe, 0xb83e,
    0xb273, 0x5570, 0x2700, 0x7647, 0x225c, 0x7f3c, 0xc074, 0x7340, 0x707c, 0x7f5d, 0xa115, 0x00b0, 0xb0b0, 0xb4a5, 0xe59c, 0xcff9,
    0x01a4, 0xb5af, 0xfe9d, 0x7506, 0x5000, 0x0257, 0x7541, 0x1747, 0x30cd, 0xcc00, 0xcb40, 0xfc31, 0xfbbc, 0x0100, 0x110b, 0x1abb,
    0x114e, 0x5ffe, 0x03c0, 0xf3dd, 0xe839, 0xb723, 0x5007, 0x0550, 0x0577, 0x2250, 0x7330, 0x000c, 0x0c0c, 0xc078, 0x7f4c, 0xb004,
    0x0011, 0x1111, 0x00a1, 0xa1a1, 0xb404, 0x443d, 0x7bfd, 0x4599, 0xce52, 0xbb04, 0xbb54, 0xeb04, 0xb903, 0x9e45, 0xae44, 0xae88,
    0x6244, 0x65c8, 0x9e75, 0x9e74, 0x9f75, 0x8f7f, 0x85ce, 0x9e31, 0xda30, 0x9df1, 0x29ed, 0x75c8, 0x9ece, 0x25cf, 0x9b9e, 0x20b8,
    0xb9ce, 0x5388, 0xb9c2, 0x5f84, 0x79ba, 0x20c8, 0xc9be, 0x20d9, 0xd8af, 0x2078, 0x790e, 0x947c, 0x3d33, 0xef81, 0x78aa, 0x21d3,
    0xc3ae, 0x9a87, 0x28aa, 0x2384, 0xb6ef, 0x8dc0, 0x1867, 0xef84, 0x7daf, 0x71f1, 0xe3db, 0xee84, 0x6ca4, 0x6b4a, 0xf295, 0xb17a,
    0x6f64, 0x9897, 0x1aac, 0x0659, 0x3f63, 0x9dc7, 0x1fdb, 0x2409, 0x4c53, 0x9dcb, 0x13d7, 0xe471, 0x331f, 0x2dcf, 0x13c6, 0xf560,
    0x33be, 0x8c6e, 0xa7c2, 0xb15d, 0x4843, 0xc9f7, 0x6990, 0x0a59, 0xf317, 0x22f3, 0xd093, 0x941c, 0x5d53, 0x8c7b, 0xb2d7, 0xf1d4,
    0xc326, 0x120f, 0x2da2, 0x7eab, 0x46e8, 0x8c3e, 0xf792, 0xe35a, 0x6f05, 0xf9f6, 0x695c, 0xc695, 0xf49b, 0xd94e, 0xd092, 0x951d,
    0x4d59, 0x86ca, 0xa928, 0xb5d5, 0x84e7, 0xa613, 0x7187, 0x95ad, 0xfde9, 0x326f, 0x4cb4, 0x7a2c, 0x8543, 0x13bc, 0x8f1a, 0xe0ab,
    0xade9, 0x3038, 0x39f5, 0x6d6b, 0xb58e, 0xdfbc, 0x445a, 0x1c9a, 0x5655, 0x3138, 0x28fe, 0x77d0, 0xa4c0, 0x8042, 0x479a, 0xef47,
    0xbe6c, 0x861b, 0x78f9, 0x7280, 0xa1b7, 0xa212, 0x34aa, 0xef4b, 0xb260, 0x4663, 0x07b5, 0xc284, 0xa1a6, 0xb303, 0x340b, 0x4eea,
    0x0664, 0x025e, 0x7c48, 0x871d, 0x6ff4, 0x0807, 0x8f5f, 0xa5ee, 0xbf67, 0x9c1b, 0xd20c, 0x2995, 0x0db0, 0x6dcf, 0x112a, 0x3b9a,
    0x2012, 0x1364, 0x57c2, 0xb7a4, 0xd780, 0xf03e, 0x38c7, 0x4e52, 0xbedc, 0x36ab, 0xcc5c, 0x971c, 0x6e4e, 0xa3b6, 0x8105, 0x11d6,
    0xc766, 0x1663, 0x05e2, 0xb7c5, 0xb6e1, 0x83ce, 0xf80b, 0x85aa, 0xfa55, 0xf9e2, 0x7d48, 0x9616, 0x754f, 0x1949, 0xd0a1, 0xa62e,
    0x4cba, 0x7422, 0x652f, 0x7992, 0x08e0, 0x68b8, 0x337a, 0x48aa, 0x201e, 0x1f68, 0x97ba, 0xc8e8, 0x6784, 0xf02f, 0x29d6, 0x4ef3,
    0x1f7d, 0x82af, 0x8861, 0xece1, 0x2bd7, 0x6de4, 0x3a01, 0xaa82, 0x2c62, 0xaf60, 0x9ba7, 0x1981, 0x1869, 0xe18a, 0x9dc3, 0x1bdf,
    0x6421, 0x6697, 0xf237, 0x13d8, 0xeb7e, 0xc379, 0x4d50, 0x8fc3, 0x3972, 0xeaec, 0x40e0, 0xe20c, 0x2858, 0xd176, 0x60f2, 0xf168,
    0x7f9a, 0x66d2, 0xb772, 0x0156, 0x475d, 0x2880, 0x09ae, 0x37fd, 0x8b01, 0xbf9c, 0x67e0, 0x944b, 0x0a04, 0xae4a, 0xa086, 0x8228,
    0x0fe6, 0x198f, 0x1667, 0x01e6, 0xf7ed, 0x9c25, 0xec32, 0xf804, 0x8aa5, 0x0a33, 0x997d, 0xe14d, 0x5a04, 0xac1d, 0xd5c7, 0x956f,
    0x3f2b, 0xd58f, 0xdd27, 0xfdd7, 0x0c51, 0x9d25, 0xfd39, 0xe2bf, 0x9beb, 0x55cd, 0x9abd, 0x1290, 0xb23d, 0x1b3e, 0x85c0, 0x903f,
    0x3a5c, 0xf7df, 0xae17, 0xfddb, 0x005d, 0x5d5d, 0x8275, 0x52bb, 0x9bfa, 0x44dc, 0x9a1c, 0xb331, 0x0639, 0x5f03, 0xfe3d, 0xd5a6,
    0xf40e, 0x4cdb, 0x1543, 0x16df, 0xb95e, 0xc318, 0x2c31, 0xfc33, 0xf9be, 0x2114, 0x0469, 0x2d45, 0x994c, 0xd07c, 0x7bf3, 0x4b97,
    0x2e3e, 0xd12a, 0x3cae, 0x6317, 0x2790, 0xe6d7, 0xb7af, 0xdc8b, 0x4070, 0x729c, 0xbdab, 0x72c1, 0xe0f6, 0xf0b4, 0xb24d, 0x6b4e,
    0xf691, 0xf152, 0x45a0, 0xf76b, 0x1aa3, 0x0956, 0xcf05, 0xfd58, 0x83de, 0xe81b, 0x9501, 0x5145, 0x5619, 0x7d74, 0xaa2a, 0x84ca,
    0x8b3e, 0x80a3, 0xa67b, 0x19ef, 0x7607, 0x621c, 0x3d90, 0x4c22, 0xecba, 0x708c, 0x8fad, 0x571c, 0x697a, 0xe0b3, 0xb5f1, 0xa0c3,
    0xc76d, 0x1d68, 0xb5ac, 0xfd9e, 0x4518, 0x4fd3, 0x2e56, 0xb942, 0xdf04, 0xfce2, 0x286f, 0xe641, 0x2139, 0x2944, 0xdc61, 0xaa9a,
    0x347a, 0x3f9b, 0x653f, 0x6982, 0x184b, 0xc3a8, 0x9c81, 0x4896, 0x1c22, 0xeeed, 0x05cd, 0x98ea, 0x67d1, 0xa57a, 0x2bf3, 0x49c0,
    0x5b7f, 0xc66d, 0x0c63, 0xaf17, 0xecd0, 0x1ae6, 0x4c13, 0xdd8b, 0x517b, 0x6827, 0xace5, 0x2d3f, 0xe336, 0x0369, 0x5a74, 0xdc6d,
    0xa696, 0xf402, 0x40d7, 0xd53b, 0x6993, 0x095a, 0xc309, 0x3d20, 0xfc92, 0x581f, 0x9510, 0x4054, 0x56b8, 0xdcd5, 0x1e2e, 0xc0f7,
    0xf0c3, 0xc53a, 0x6829, 0xa2eb, 0xcd53, 0x8918, 0x8493, 0xd267, 0x42fe, 0xde04, 0xede9, 0x32d4, 0xf70f, 0x7ec7, 0x2a84, 0x2fbc,
    0x42a3, 0x8359, 0x6f9c, 0x606f, 0x6cf5, 0x3a1b, 0xb098, 0x9c8d, 0x449a, 0xdc5a, 0x91a1, 0xb5c9, 0x98fb, 0x76c0, 0xa5db, 0x8a52,
    0xfdc4, 0x1f42, 0xbd90, 0x49fa, 0x6145, 0x57d4, 0xa1b2, 0xa717, 0x6488, 0xcf3e, 0xc663, 0x026d, 0x4f7b, 0x86fe, 0x9d1c, 0xc400,
    0x4318, 0x29e9, 0x71cc, 0xdee6, 0x0f0b, 0xf462, 0x20b7, 0xb6c1, 0xa3ee, 0xd95d, 0xc381, 0xb5a8, 0xf99a, 0x0530, 0x6517, 0x41aa,
    0xb94d, 0xd00b, 0x0c84, 0x48f0, 0x7a44, 0xed2b, 0xf016, 0x10ef, 0xef54, 0xad7f, 0xa6ae, 0xcc3a, 0xf17a, 0x6d88, 0x566d, 0x0900,
    0x9953, 0xcf63, 0x9b3e, 0x8018, 0x1dc0, 0x1d04, 0xd9c0, 0x5e1c, 0xf029, 0x2fd0, 0x2ecf, 0x20db, 0xdaad, 0x006c, 0x6c6c, 0xa382,
    0xb531, 0x6003, 0x0099, 0x9999, 0x05a9, 0xfc8e, 0x4403, 0x45c3, 0x9408, 0x4947, 0xdcf8, 0x3303, 0x31d3, 0xc315, 0x213c, 0x2c41,
    0x8c43, 0x8aef, 0x4079, 0x7b95, 0x2df1, 0x2df8, 0x24f1, 0xb4ab, 0xeb92, 0x2f95, 0x6b8a, 0x3255, 0x768e, 0xeb95, 0x2892, 0x1bbc,
    0x0742, 0x3573, 0x2799, 0xefde, 0x27f5, 0x83b2, 0x8477, 0x3683, 0xe474, 0x361a, 0x7ded, 0x33b3, 0x8163, 0x77b0, 0xc4a0, 0xe3b8,
    0x8de7, 0x3f40, 0xbee4, 0x0e93, 0x7df1, 0x2faf, 0x51b0, 0xa3ec, 0xdb5f, 0xe395, 0xa0ca, 0xce64, 0x8d32, 0xea95, 0x3999, 0x0107,
    0x160c, 0x6a8d, 0x2459, 0x1c03, 0xcfcc, 0x3491, 0xd470, 0x33d3, 0xe103, 0x144a, 0x0edd, 0x33bf, 0x8d6f, 0xb7c8, 0xbbec, 0x53bc,
    0x8df6, 0x2e51, 0xbe45, 0xaf32, 0xc9f5, 0x6b92, 0x2a4d, 0xe675, 0x150d, 0x5891, 0x1b9e, 0x2560, 0x3431, 0x74d0, 0x97dd, 0xaf8f,
    0x7448, 0x0f45, 0xba2c, 0x8277, 0x50b9, 0xbbee, 0x51be, 0xade2, 0x3b33, 0x89bb, 0x2730, 0x4677, 0x13a1, 0x9207, 0x2072, 0x7304,
    0x3438, 0x7dd9, 0x0787, 0xf0b6, 0xb04f, 0x4b5a, 0xe3f3, 0xc6ac, 0xcda2, 0x78e9, 0x6290, 0xb11c, 0x0902, 0x9b51, 0xef77, 0x8e5c,
    0xb7e6, 0x95c2, 0x9286, 0xa1f3, 0xe656, 0x362e, 0x49d9, 0x4266, 0x469c, 0xf84a, 0xc4eb, 0xa8f3, 0x7f05, 0xf94d, 0xd2e7, 0xc27e,
    0x5b5c, 0xe54e, 0x1d2b, 0xf6ef, 0x8f2c, 0xd69d, 0xfc28, 0xe2a5, 0x81f1, 0xe522, 0x7147, 0x556d, 0x3a1d, 0xb69e, 0xfcb1, 0x7b3c,
    0x8458, 0x19ac, 0x3544, 0x10ae, 0xae15, 0xffd9, 0x2049, 0x483f, 0xb58b, 0xdab9, 0x1478, 0x3cef, 0x2256, 0x7536, 0x6030, 0x33aa,
    0x987a, 0xf741, 0x3089, 0x8844, 0xc9c4, 0x5aa3, 0x0bba, 0x01ff, 0xeef4, 0x1cd4, 0x181b, 0x93f8, 0xce86, 0x6fd0, 0x2c23, 0xee21,
    0xc901, 0x9f66, 0x9c6c, 0xa57b, 0x2af2, 0x59ca, 0x51ce, 0xdd92, 0x4862, 0xe8d6, 0x58cc, 0x46c3, 0xa715, 0x668a, 0xef2a, 0xd301,
    0x3593, 0xc779, 0x097c, 0xe52f, 0x7c4a, 0x851f, 0x4fe0, 0x1d65, 0xb8a1, 0x2dec, 0x30e5, 0xe428, 0x6a46, 0xef92, 0x6bb9, 0x0166,
    0x776d, 0x197d, 0xe495, 0xd7fb, 0x8b45, 0xfbd8, 0x6564, 0x32d9, 0xfa02, 0xaeb5, 0x5f79, 0x8447, 0x06b3, 0xd589, 0xdb21, 0x9deb,
    0x33f7, 0xc527, 0x7534, 0x6232, 0x13be, 0x8d18, 0xc0bf, 0xb88b, 0x07c6, 0xb1f7, 0xe2e9, 0xcdbd, 0x67f6, 0x825d, 0x7a93, 0x3afc,
    0x577f, 0x0a19, 0xb357, 0x605f, 0x5cc5, 0x0be6, 0x5da3, 0x7c8b, 0x44de, 0x981e, 0x9325, 0x135b, 0x68fd, 0x763f, 0x5a24, 0x8c3d,
    0xf491, 0xd344, 0x70d6, 0xd5f7, 0xa55f, 0x0ed6, 0x38b4, 0x3d21, 0xfd93, 0x4815, 0x9fa1, 0x5bab, 0x12b9, 0x9b14, 0xaa32, 0x9cd2,
    0x1bc5, 0x7e3b, 0xd678, 0x19cd, 0x5425, 0x635e, 0x6ed9, 0x3421, 0x64c0, 0x8776, 0x049f, 0xdbb3, 0x0f79, 0x8610, 0x73f2, 0xc2ce,
    0xebec, 0x51eb, 0xf8b7, 0x3916, 0x8e88, 0x6332, 0x02b5, 0x97a3, 0xd1f1, 0xe775, 0x0406, 0x422a, 0x0ad0, 0x7a9e, 0x37f1, 0x870d,
    0x7fe4, 0x18ac, 0x244f, 0x0a15, 0xbf5b, 0xa027, 0x2389, 0xbbe2, 0x5db2, 0x6d9a, 0x447f, 0x39bf, 0x2721, 0x5766, 0x1300, 0x33a6,
    0x9476, 0x3739, 0x4fc5, 0x3840, 0xc9d5, 0x4bb2, 0x0b1b, 0xa05e, 0x5af0, 0x58e9, 0x63e6, 0xd661, 0x00d4, 0xd4d4, 0x9777, 0x0525,
    0x7002, 0x0123, 0x3228, 0x0bf3, 0x48b6, 0x3c02, 0xcfbb, 0x43e6, 0xd717, 0x67a9, 0xdd02, 0xd8f2, 0x7d25, 0xfb7b, 0xc6c7, 0xa6c9,
    0xab5d, 0xe2b6, 0x92e2, 0xc597, 0xc584, 0xd697, 0xf622, 0x42e1, 0xc11b, 0x0d24, 0xf95b, 0xc4f1, 0xb2e9, 0xcfea, 0x12b7, 0x951a,
    0x4a5e, 0xf6fc, 0x9c3f, 0xf628, 0x48eb, 0x615f, 0x4dce, 0x115d, 0x4ced, 0x2375, 0x471e, 0x6bc3, 0x7b1c, 0xa478, 0x38fa, 0x736f,
    0x5f53, 0xae6d, 0x87a1, 0xd348, 0x7cda, 0x158f, 0xda13, 0xbed2, 0x38a5, 0x2c30, 0xfd32, 0xe9b4, 0x2ba5, 0x1f96, 0x6944, 0xde8d,
    0x6460, 0x27d6, 0xa091, 0x953f, 0x6f7b, 0x8788, 0xfa61, 0xcdd6, 0x0c9d, 0x51e9, 0xfab5, 0x1902, 0x9bea, 0x54cc, 0x8ab7, 0x1821,
    0xa9c2, 0x5f3f, 0xc201, 0x2423, 0x6679, 0x1cd9, 0x1516, 0x438a, 0xbb7b, 0xc42b, 0x6833, 0xb8f1, 0x7dbc, 0x62e2, 0xc36e, 0x5a47,
    0xef5e, 0xa775, 0x06ea, 0x8cd0, 0x197c, 0xe594, 0xc7f1, 0x81f4, 0xe027, 0x2165, 0x7518, 0x4e1e, 0xf290, 0xb47f, 0x3f46, 0xb8e2,
    0x6eaf, 0x4257, 0x77ad, 0xd9bd, 0x2361, 0x530a, 0x3b40, 0xfac8, 0x647f, 0x38c9, 0x405c, 0x5eb0, 0x5c85, 0x4ba6, 0x1f0f, 0xf0dd,
    0xdb24, 0x98ee, 0x63d5, 0xe552, 0x0137, 0x263c, 0x5b70, 0xc962, 0xfc05, 0xcf88, 0x70d5, 0xd6f4, 0x9541, 0x1105, 0x14b5, 0xf122,
    0x35d0, 0x843a, 0x7bce, 0x76aa, 0xcfb1, 0x49ec, 0x7753, 0x2743, 0x3504, 0x50ee, 0xecb9, 0x738f, 0xbfb3, 0x48cf, 0x457b, 0x2cb0,
    0x7db2, 0x6cec, 0x2302, 0x3069, 0x68a4, 0x2f66, 0x9879, 0xf442, 0x0097, 0x9797, 0xe5c5, 0x96a0, 0xc3f9, 0xcdd0, 0x0a9b, 0x31d5,
    0xc513, 0x4100, 0x13e7, 0xd441, 0x02e2, 0xc0f4, 0xf3c0, 0xf524, 0x77fa, 0x8eea, 0x0150, 0x415b, 0x48bc, 0x3608, 0x6fff, 0x030c,
    0x3f11, 0xefb5, 0x4c9e, 0x5006, 0x0451, 0x157d, 0x28e1, 0x68cf, 0x440d, 0x4bcd, 0x7464, 0x2369, 0x5b02, 0xbb10, 0xaf40, 0xbb87,
    0x38d7, 0x5e42, 0xae77, 0x9dbb, 0x63a7, 0x9720, 0x5272, 0x5233, 0x1372, 0x41d4, 0xc733, 0x4336, 0x07c7, 0xb0f6, 0xf2e3, 0xc70c,
    0x7c09, 0xc65c, 0x3d52, 0x8ee0, 0x0b5a, 0xe11f, 0x0856, 0xde0e, 0xe7e3, 0x9290, 0xb7e5, 0x96c1, 0xa298, 0xbe20, 0xca57, 0xfa2d,
    0x819a, 0x8e49, 0xa2f3, 0xd54b, 0x19e3, 0x7a0b, 0xa264, 0x42dc, 0xfc26, 0xecab, 0x619d, 0x8f0c, 0xf6bd, 0xdd7e, 0xa48e, 0xce0c,
    0xe55a, 0x093f, 0xa66c, 0x0ef8, 0x169a, 0xfc1b, 0xd196, 0x8012, 0x17ca, 0xbd40, 0x992a, 0xb61a, 0x7835, 0xbe4c, 0xa63b, 0x59af,
    0x34ab, 0xee4a, 0xa26a, 0x4cd2, 0x1c4a, 0x8685, 0xe667, 0x071f, 0x682e, 0xa5ec, 0xbd65, 0xbc0f, 0xc76e, 0x1e6b, 0x85b2, 0xe24d,
    0x6919, 0x83d0, 0xe615, 0x756d, 0x3b6b, 0xd1e3, 0xf567, 0x34b9, 0xfc58, 0x92d5, 0xf2a0, 0x844f, 0x0ebb, 0x55d9, 0x8ea9, 0x4213,
    0x33e9, 0xdb39, 0x85f3, 0xa30c, 0x3bbf, 0x0537, 0x6210, 0x319c, 0x8c5a, 0x93f6, 0xc088, 0x8fbc, 0x460d, 0x69db, 0x4112, 0x01f5,
    0xe4fe, 0xbc90, 0x58f1, 0x7bfe, 0x469a, 0xfe4c, 0xa4d7, 0x9755, 0x2707, 0x7140, 0x526a, 0x4a2b, 0x8389, 0xbf4c, 0xb730, 0x4314,
    0x25e5, 0xb1b4, 0xa1aa, 0xbf0f, 0xf473, 0x31a6, 0xb660, 0x024f, 0x6d59, 0x87bc, 0xce55, 0xbc03, 0xcb62, 0xde13, 0xfafe, 0x5249,
    0x6908, 0x92c1, 0xe6b4, 0xd4cc, 0x8f6f, 0x95de, 0x8e9a, 0x7120, 0x320a, 0x29d1, 0x49f4, 0x6f4b, 0xb7b8, 0xcb9c, 0x20ed, 0xec9b,
    0x51ad, 0xbef1, 0x1b86, 0x3d78, 0xa4ca, 0x8a48, 0xe7de, 0xafad, 0x566a, 0x0e07, 0xe965, 0xfa74, 0xd8c3, 0x4c14, 0xda8c, 0x214d,
    0x5d30, 0xef18, 0xe133, 0x247a, 0x3f20, 0xde84, 0x6d69, 0xb78c, 0xffa8, 0x5138, 0x2b64, 0xde57, 0xbeba, 0x50cd, 0xcf9a, 0x62c7,
    0xe64b, 0x2b33, 0x8900, 0x9c8b, 0x429c, 0xbc66, 0xae07, 0xedcb, 0x10f6, 0xf64d, 0x2d8e, 0x5287, 0xa7c6, 0xb559, 0x086b, 0xe333,
    0x066c, 0x0a56, 0xfc18, 0xd295, 0xb00c, 0x0819, 0x9141, 0x5529, 0x7e59, 0xb41a, 0x5a23, 0x8b3a, 0x84a7, 0xe653, 0x332b, 0x19fb,
    0x6213, 0x329f, 0xbc44, 0x8c25, 0xec89, 0x43bf, 0x8e4e, 0xa5f4, 0xa57d, 0x2cf4, 0x39f6, 0x6e68, 0x8590, 0xc06f, 0x685b, 0xd099,
    0x9e16, 0xfd17, 0xcc91, 0x5ad1, 0x79c8, 0x52ba, 0x9afb, 0x54d6, 0x90ad, 0xa8ce, 0x4238, 0x18c2, 0x4a21, 0x8983, 0x1f08, 0xf7da,
    0xab12, 0xadf9, 0x2028, 0x295e, 0xc67b, 0x1a75, 0xdf80, 0x7866, 0xed1f, 0xc422, 0x613a, 0x28ab, 0x2285, 0xa6e5, 0x8771, 0x0398,
    0xab85, 0x3a6e, 0xc5ed, 0xbffe, 0x0582, 0xd7a5, 0xd51b, 0x49b3, 0x280c, 0x8522, 0x72dd, 0xfcea, 0x2067, 0x6611, 0x74b1, 0xf6bc,
    0xdc7f, 0xb484, 0xc4bd, 0xfea5, 0x4d3e, 0xe1ad, 0xbae4, 0x4abf, 0x171d, 0x6a97, 0x3e43, 0xacec, 0x2436, 0x736c, 0x5c50, 0x9e73,
    0x9872, 0xff49, 0xb0d9, 0xddcc, 0x163c, 0x5abd, 0x15a4, 0xf138, 0x2fca, 0x34d5, 0x9034, 0x3157, 0x4791, 0xe44c, 0x0e22, 0xcc40,
    0x8b00, 0xbe9d, 0x77ea, 0x9efa, 0x11fb, 0xea4b, 0xe747, 0x3634, 0x53c3, 0xf289, 0xad66, 0xbfb7, 0x4ccb, 0x0553, 0x0674, 0x124e,
    0x6ce3, 0x2c0d, 0xc00f, 0x083b, 0xb363, 0x546b, 0x2d10, 0xcc19, 0xd259, 0x7cc0, 0x0f95, 0x6afc, 0x5528, 0x7f58, 0xa410, 0x5092,
    0x90c5, 0xc0a6, 0xa192, 0x8737, 0x45de, 0x8915, 0x899e, 0x0215, 0x3703, 0x75ff, 0xa9f9, 0x6404, 0x43b2, 0x8343, 0x7586, 0xd080,
    0x870f, 0x7de6, 0x38b8, 0x312d, 0x3deb, 0x3759, 0x2fa5, 0x5bba, 0x03a8, 0x9bb5, 0x0b93, 0x28d6, 0x5ff8, 0x05c6, 0x93e1, 0xd79f,
    0xef21, 0xd80a, 0x85dd, 0x8d22, 0xfa85, 0x2932, 0xaa17, 0xb9f7, 0x6ab1, 0x1865, 0xed86, 0x5dbb, 0x6493, 0xd425, 0x6686, 0xe326,
    0x1379, 0x4adf, 0x777d, 0x096d, 0xf43e, 0x7ceb, 0x24be, 0xfbe4, 0x5958, 0xc35c, 0x6875, 0xfeb7, 0x5f2c, 0xd112, 0x0496, 0xd2ba,
    0x9f23, 0xd929, 0xb7f5, 0x86d1, 0xb233, 0x1530, 0x65ac, 0xfa11, 0xbda6, 0x7fcc, 0x3084, 0x8549, 0x19b6, 0x2f5e, 0xa041, 0x45ef,
    0xb824, 0xa869, 0xe59f, 0xccfa, 0x31ba, 0xaa7c, 0xd29c, 0xb905, 0x9843, 0xce78, 0x912e, 0x3a46, 0xedc5, 0x1ef8, 0x1621, 0x47a0,
    0xd57d, 0x2fd5, 0x2bca, 0x70f9, 0xfad8, 0x746f, 0x2862, 0xeb4c, 0xf14b, 0x5cb9, 0x779a, 0xee8a, 0x62aa, 0x8b26, 0x98bb, 0x3680,
    0xe777, 0x0604, 0x623e, 0x1fb2, 0x4d60, 0xbff3, 0x088f, 0x07d7, 0xa0e6, 0xe248, 0x6c1c, 0xd3f2, 0xc660, 0x016e, 0x7f65, 0x992d,
    0xb11d, 0x0803, 0x8b5b, 0xe5c6, 0x95a3, 0xf3e7, 0xd203, 0x269a, 0xfdd6, 0x0d50, 0x8d2f, 0xf788, 0xf940, 0xdfea, 0x120c, 0x2ea1,
    0x4eb5, 0x593b, 0xa03f, 0x3b91, 0x2b19, 0xa32a, 0x1d99, 0x445d, 0x1b9d, 0x2663, 0x042f, 0x6b03, 0xbbdc, 0x638c, 0xbc0b, 0xc36a,
    0x5e43, 0xaf76, 0x8db1, 0x6916, 0x8cdf, 0x1673, 0x15f2, 0xa76e, 0x1df1, 0x2c35, 0xf837, 0xb996, 0x0bd0, 0x6b95, 0x2d4a, 0x9643,
    0x201a, 0x1b6c, 0xd792, 0xe22c, 0x0878, 0xf020, 0x26d9, 0xbe95, 0x7fe2, 0x1eaa, 0x4473, 0x35b3, 0xe759, 0x282a, 0xa304, 0x33b7,
    0x8567, 0x3798, 0xee64, 0x8c44, 0x8de8, 0x304f, 0x4e82, 0x6e0c, 0xe1f4, 0xe3bd, 0x88e2, 0x6f62, 0x9e91, 0x7a90, 0x39ff, 0x6761,
    0x15ca, 0x9f56, 0xac5c, 0x9486, 0xc7c9, 0xb9cc, 0x518a, 0x99d6, 0x4ae6, 0x4e44, 0xa8ca, 0x463c, 0x58ea, 0x60e5, 0xe67f, 0x1f07,
    0xf8d5, 0x5b74, 0xcd66, 0xbc2d, 0xe54c, 0x1f29, 0xd6fb, 0x9a4e, 0xe163, 0x742a, 0x6d27, 0xf9c2, 0x5d68, 0xb740, 0x3364, 0x56b4,
    0xd0d9, 0xde56, 0xbfbb, 0x40c7, 0xc52b, 0x7938, 0xa24a, 0x6cf2, 0x3d1c, 0xc0ae, 0xa99a, 0x0767, 0x1056, 0x56ed, 0x8980, 0x1c0b,
    0xc7c4, 0xb4c1, 0x81f8, 0xec2b, 0xe11d, 0x0a54, 0xfe1a, 0xf281, 0xa56e, 0x3fe7, 0x1943, 0xdaab, 0x066a, 0x0c50, 0x9c24, 0xed33,
    0xe80e, 0x8014, 0x11cc, 0xdd7c, 0xa68c, 0xee18, 0xf038, 0x3ec1, 0x2e6e, 0x817a, 0x6ea9, 0x4451, 0x1791, 0xe61b, 0x7b63, 0xdb07,
    0xbbcd, 0x729d, 0xbcaa, 0x62cb, 0xea47, 0xeb4b, 0xf64c, 0x2c8f, 0x428d, 0xad77, 0xaea6, 0x4c6a, 0xa4f2, 0xb270, 0x5673, 0x171e,
    0x6994, 0x0e5d, 0xb33f, 0x0837, 0xbf6f, 0x9413, 0x525c, 0x7c1d, 0xd248, 0x6dd1, 0x0f34, 0xcb5d, 0xe12c, 0x3b65, 0xdfed, 0x150b,
    0x5e97, 0x7ba2, 0x1ac6, 0x6c33, 0xfcdd, 0x1750, 0x27da, 0xac9d, 0x5547, 0x1037, 0x378c, 0xfa70, 0xdcc7, 0x0c3c, 0xf048, 0x4eb1,
    0x5d3f, 0xe017, 0x1155, 0x44e5, 0xa325, 0x1296, 0xb43b, 0x7b02, 0xba66, 0xc83d, 0xb251, 0x7752, 0x2642, 0x250e, 0x5a5f, 0xf746,
    0x378e, 0xf872, 0xfcd3, 0x195e, 0xc7b6, 0xc6b3, 0xd2bd, 0x9824, 0xa91f, 0x82e2, 0xc52c, 0x7e3f, 0xd27c, 0x59e5, 0x7ee1, 0x0ca2,
    0x6ed6, 0x3b2e, 0x94a6, 0xe7e9, 0x989a, 0x17a1, 0xd62b, 0x4a9e, 0x363c, 0x5bcb, 0x72d9, 0xf8ee, 0x604f, 0x4cd5, 0x1b4d, 0xf6b3,
    0xd370, 0x44e2, 0xa422, 0x62a0, 0x812c, 0x38ff, 0x766a, 0x0f71, 0x8e18, 0xf3a2, 0x9746, 0x3414, 0x51f5, 0xe6a9, 0xc9d1, 0x4fb6,
    0x4b33, 0x8a9a, 0x350c, 0x58e6, 0x6ce9, 0x2607, 0x604b, 0x48d1, 0x5b65, 0xdc77, 0xbc8c, 0x44ed, 0xab2d, 0x92c6, 0xe1b3, 0xa4fa,
    0xba78, 0xd623, 0x4296, 0xb66c, 0x0e43, 0xad21, 0xf8f0, 0x7e51, 0xbc12, 0xda73, 0xdeb2, 0x5b5f, 0xe64d, 0x2d35, 0xe93c, 0xa32d,
    0x1a9e, 0x346b, 0x2e8a, 0x659e, 0xc823, 0xac4f, 0x8795, 0xe77c, 0x0d0f, 0xd270, 0x55e9, 0xbe99, 0x73ee, 0xded2, 0x3b3f, 0x85b7,
    0xe748, 0x393b, 0xa3a5, 0x9216, 0x3163, 0x73a5, 0x9599, 0xc9dd, 0x43ba, 0x8b4b, 0xf5d6, 0x8508, 0x58f7, 0x7df8, 0x26a6, 0xc1ea,
    0xfcd5, 0x1f58, 0xa78a, 0xf915, 0x8abf, 0x1029, 0x2992, 0x0ab7, 0x1df9, 0x243d, 0x7867, 0xec1e, 0xd428, 0x6b8b, 0x3354, 0x6684,
    0xe124, 0x336d, 0x5fbd, 0x4083, 0x816f, 0x7bbc, 0x04d8, 0x9cf4, 0x3de3, 0x3f51, 0xaff5, 0x0e32, 0xdc50, 0x9bab, 0x158d, 0xd811,
    0x9ec6, 0x2dc7, 0x1bce, 0x7530, 0x6636, 0x5396, 0xa7dc, 0xaf43, 0xb884, 0x08c9, 0x4191, 0x8276, 0x51b8, 0xabe4, 0x5b0f, 0xb61d,
    0x7f32, 0xce7a, 0x932c, 0x1a52, 0xf8a7, 0x2906, 0x9e23, 0xc822, 0xad4e, 0x979f, 0xedcd, 0x16f0, 0x9671, 0x1228, 0x0a85, 0x2fcb,
    0x35d4, 0x803e, 0x3be6, 0x5c6e, 0xa04d, 0x49e3, 0x785c, 0xd725, 0x559b, 0xcceb, 0x20ab, 0xaadd, 0x733d, 0x0d01, 0xdc7e, 0xb585,
    0xd4b7, 0xf414, 0x56c1, 0xa5ac, 0xfd25, 0xfea3, 0x4b38, 0x8191, 0x8542, 0x12bd, 0x9f10, 0xea1a, 0xb616, 0x7439, 0x7e34, 0xd977,
    0xe9ab, 0x34ba, 0xff5b, 0xa2cb, 0xed73, 0xa84e, 0xc2b8, 0x9d9a, 0x4286, 0xa67c, 0x1ee8, 0x0631, 0x570b, 0x7e6d, 0x802e, 0x2bf6,
    0x4cc5, 0x0b5d, 0xe618, 0x7860, 0xeb19, 0xa41e, 0x5e9c, 0x70a9, 0xaa88, 0x2668, 0x0f24, 0xdb4d, 0xf187, 0x9075, 0x7016, 0x1537,
    0x62ab, 0x8a27, 0x88b1, 0x3c31, 0xfc88, 0x4205, 0x25ff, 0xabae, 0x1145, 0x54f5, 0xb38e, 0xb986, 0x1bc0, 0x7b3e, 0x865a, 0x39b8,
    0x2026, 0x2750, 0x2617, 0x705b, 0x587a, 0xf075, 0x738c, 0xbcb0, 0x78d1, 0x5aa8, 0x00b1, 0xb1b1, 0xa4af, 0xef2d, 0xd406, 0x45a5,
    0xf26e, 0x4a81, 0x2923, 0xbb06, 0xb956, 0xcb10, 0xac61, 0xa9bb, 0x2646, 0x210a, 0x1a77, 0xdd82, 0x5872, 0xf87d, 0xf3dc, 0xe938,
    0xa729, 0x5ab6, 0x1eaf, 0x4176, 0x6591, 0xc72c, 0x5c29, 0xe70a, 0x7b79, 0xc11d, 0x0b22, 0x9967, 0xfb57, 0xeaeb, 0x47e7, 0x923a,
    0x1d4f, 0x928b, 0xacfe, 0x3624, 0x43d3, 0xe222, 0x0676, 0x104c, 0x4cf7, 0x396f, 0xf7f1, 0x8039, 0x3ce1, 0x2c58, 0x955a, 0x0a1e,
    0xb450, 0x1069, 0x69d2, 0x481b, 0x91af, 0xbbc7, 0x7897, 0x1cee, 0x2221, 0x0241, 0x6357, 0x67d0, 0xa47b, 0x3bf9, 0x4371, 0x4080,
    0x826c, 0x4ba2, 0x1b0b, 0xb0f5, 0xf1e0, 0xf712, 0x63da, 0xea5d, 0xf151, 0x46a3, 0xc775, 0x0570, 0x2557, 0x0306, 0x351b, 0x4ff1,
    0x0c74, 0xb800, 0x8c4d, 0x84e1, 0xa015, 0x11bb, 0xaa0b, 0xa5eb, 0xba62, 0xcc39, 0xf279, 0x5d96, 0x49be, 0x2501, 0x5550, 0x0720,
    0x5711, 0x6477, 0x30c1, 0xc00c, 0x0b38, 0x837d, 0x4bb8, 0x0111, 0x001a, 0x1a1a, 0xb0ef, 0xebfa, 0x47fd, 0x8820, 0xada0, 0x7971,
    0xeb03, 0xbe04, 0xee73, 0x9b53, 0xed75, 0xae48, 0xa284, 0xa23c, 0x1a84, 0x2e71, 0x9e65, 0x8e64, 0x8fde, 0x246f, 0x2a35, 0x9e0d,
    0xe60c, 0x6c74, 0xbb9a, 0x25ca, 0x9e9b, 0x709a, 0x99bb, 0x278b, 0xfdcc, 0x174a, 0x3dc0, 0x1c72, 0xbebd, 0x57ca, 0xbfac, 0x57d0,
    0xa5b6, 0xe73f, 0x4e4c, 0xa0c2, 0xc66c, 0x0d62, 0xbf1d, 0xe661, 0x0119, 0x0812, 0x9a4a, 0xe567, 0x3402, 0x47e3, 0x963e, 0x5d67,
    0xb84f, 0xc302, 0x362b, 0x4cdc, 0x1244, 0x66e9, 0x8c49, 0x80e5, 0xe03d, 0x3b7f, 0xc5f7, 0xa5e4, 0xb56d, 0x3c5f, 0x92e6, 0xc193,
    0x85ac, 0xfc53, 0x99de, 0x42ee, 0xce14, 0xfd42, 0x99c4, 0x58f4, 0x7efb, 0x16b8, 0xde39, 0xd0d4, 0xd35b, 0x6fc9, 0x353a, 0x6ed0,
    0x3d28, 0xf49a, 0xd84f, 0xc098, 0x9fac, 0x56a6, 0xc2cb, 0xeee9, 0x01c9, 0xd8c2, 0x4d15, 0xca86, 0x2bfc, 0x46cf, 0xab19, 0xa6f2,
    0x9066, 0x6305, 0x3582, 0xd668, 0x09dd, 0x448e, 0xc84e, 0xc122, 0x341d, 0x58fc, 0x76f3, 0x96e8, 0x8bb1, 0x0f2c, 0xd345, 0x71d7,
    0xc5fd, 0xafee, 0x1529, 0x7cb5, 0x7ae0, 0x498f, 0x1430, 0x74a7, 0xe0aa, 0xace8, 0x2032, 0x3344, 0x7694, 0xf18f, 0x987d, 0xf046,
    0x40bf, 0xbd53, 0x8a39, 0x96af, 0xccf6, 0x3db6, 0x6a04, 0xadd0, 0x0901, 0x9852, 0xdf69, 0x918f, 0x9be7, 0x59c1, 0x5ac5, 0x6ddc,
    0x0239, 0x1b2f, 0x94d1, 0x909e, 0x9bfd, 0x43db, 0xea2a, 0x8626, 0x45c4, 0x930f, 0x3971, 0xe9ef, 0x70fe, 0xfddf, 0x0459, 0x1d75,
    0xa8b1, 0x3d47, 0x9bf5, 0x4bd3, 0x6a7a, 0xd3ae, 0x9a3c, 0x9311, 0x276f, 0x1928, 0xb1c0, 0xd5de, 0x8c76, 0xbfda, 0x21a6, 0xb6db,
    0xb9f4, 0x69b2, 0x287b, 0xf255, 0x71ba, 0xa890, 0x1c66, 0xaaa9, 0x0749, 0x3e78, 0x97d7, 0xa585, 0xd40c, 0x4faf, 0x522a, 0x0a6b,
    0xc125, 0x331a, 0x28ca, 0x43e4, 0xd515, 0x47bd, 0xc860, 0xef0c, 0xf527, 0x74f9, 0xbef4, 0x1e83, 0x6d5a, 0x84bf, 0xfe4b, 0xa3d0,
    0xe763, 0x1210, 0x32bd, 0x9e66, 0x8d67, 0xbfc0, 0x3bbc, 0x0634, 0x520e, 0x2e4f, 0xa05b, 0x5ff5, 0x08cb, 0x4393, 0xa262, 0x44da,
    0x9c1a, 0xd30d, 0x399f, 0x0701, 0x7630, 0x552b, 0x7c5b, 0x940e, 0x4f41, 0xbcc4, 0x0ca5, 0x69d1, 0x4b18, 0xa1b1, 0xa414, 0x5496,
    0xd0ed, 0xea62, 0xce6e, 0x8738, 0x4ad1, 0x7973, 0xe901, 0x9e10, 0xfb11, 0xacad, 0x6577, 0x21ca, 0xdab7, 0x1a76, 0xdc83, 0x4878,
    0xf2cc, 0xe823, 0xad39, 0xe0e8, 0xeeaa, 0x428a, 0xaa70, 0xde90, 0x797d, 0xe70f, 0x7e7c, 0x913f, 0x2b57, 0xed64, 0xbf59, 0xa225,
    0x039d, 0xae80, 0x6a4c, 0xe598, 0xcbfd, 0x418c, 0x9f6b, 0x9161, 0x7509, 0x5f0f, 0xf231, 0x15de, 0x8b42, 0xfcdf, 0x1552, 0x07ce,
    0xb9ff, 0x62b9, 0x9835, 0xb80e, 0x8243, 0x648d, 0xca3b, 0x9641, 0x2218, 0x3b78, 0xc2f0, 0xd5d2, 0x807a, 0x7fa2, 0x5eea, 0x06df,
    0xb9e5, 0x78a3, 0x28da, 0x53f4, 0xc5be, 0xecad, 0x679b, 0xef30, 0xc91b, 0x857c, 0x2c83, 0x4e81, 0x6d0f, 0xd1ea, 0xfc6e, 0xa4e3,
    0xa361, 0x56d2, 0xb6bf, 0xdd90, 0x4a60, 0xc8c2, 0x4dae, 0x713d, 0x2f17, 0xe908, 0x9719, 0x6b4b, 0xf394, 0xa170, 0x65d5, 0x8368,
    0x5ead, 0x4198, 0x8b7f, 0xc1e2, 0xf4dd, 0x9f08, 0xf202, 0x26ed, 0x8aa1, 0x0e37, 0xd955, 0xcb89, 0x35f8, 0xac12, 0xdac8, 0x6509,
    0x5fb4, 0x498a, 0x1135, 0x2485, 0xc0df, 0xd8eb, 0x643c, 0x7b8a, 0x32ee, 0xcd35, 0xef7e, 0x8755, 0x27bc, 0xcafb, 0x5681, 0xe5ec,
    0xbf89, 0x72f5, 0xd4c2, 0x8161, 0x75b2, 0xe4b4, 0xf6da, 0xba19, 0xb742, 0x3166, 0x76a0, 0xc5bb, 0xe9a8, 0x37b9, 0xcf45, 0xbd18,
    0xc172, 0x644d, 0x0afb, 0x51b5, 0xa6e9, 0x8b7d, 0xc3e0, 0xd4c9, 0x8a6a, 0xc5fc, 0xaeef, 0x0523, 0x7604, 0x611f, 0x0d8e, 0x53f1,
    0xc0bb, 0xbc8f, 0x47ee, 0x9b33, 0x8d15, 0xcdb2, 0x68f9, 0x723b, 0x1a0c, 0xa6f9, 0x9b6d, 0xd34b, 0x7fd9, 0x2591, 0xc5c0, 0x92d3,
    0xf4a6, 0xe473, 0x311d, 0x0ddb, 0x06a4, 0xc29e, 0xbbbc, 0x03ec, 0xdff1, 0x0917, 0x8e44, 0xaffe, 0x0539, 0x6c1e, 0xd1f0, 0xe674,
    0x140c, 0x489b, 0x112f, 0x3e9f, 0x7030, 0x3311, 0x23c1, 0xf3aa, 0x9f4e, 0xb444, 0x047d, 0x3951, 0xc9cf, 0x51a8, 0xbbf4, 0x4ba4,
    0x1d0d, 0xd0c9, 0xce46, 0xaf10, 0xebd7, 0x6ad0, 0x7904, 0x9e76, 0x9d77, 0xaf6b, 0x90ac, 0xa9cf, 0x5232, 0x1273, 0x51de, 0xcd82,
    0x58c9, 0x43c6, 0xf737, 0x46ff, 0x9b29, 0x970f, 0x7d5d, 0x8303, 0x35c6, 0x922c, 0x0b59, 0xe21c, 0x3848, 0xc1dd, 0xcbe2, 0x5e93,
    0x7fa6, 0x5aee, 0x46f7, 0x9321, 0x175f, 0x28d5, 0x5cfb, 0x35d8, 0x8c32, 0xfb9e, 0x2322, 0x1049, 0x49f2, 0x694d, 0xd784, 0xf43a,
    0x78ef, 0x6496, 0xd120, 0x36a4, 0xc353, 0x677a, 0x0ed1, 0x3fb3, 0x4d17, 0xc884, 0x0be8, 0x53ad, 0x9ce7, 0x2ef0, 0x1fe4, 0x1b36,
    0x8dc8, 0x106f, 0x6fd4, 0x2827, 0xae09, 0xe3c5, 0xf09a, 0x9c63, 0xaa74, 0xda94, 0x3955, 0xcdcb, 0x1180, 0x9130, 0x2458, 0x1d02,
    0xdfc6, 0x3e20, 0xcf8f, 0x77d2, 0xa6c2, 0xa056, 0x52f8, 0xd8b9, 0x366e, 0x0999, 0x00ca, 0xcaca, 0x67b0, 0xc41b, 0x5803, 0x890c,
    0x9087, 0x82e4, 0xc32a, 0x1e03, 0xedda, 0x01e7, 0xf6ec, 0x8c2f, 0xe683, 0xe3fb, 0xcea4, 0x4df2, 0x2d61, 0xbd68, 0xb102, 0x171c,
    0x6b96, 0x2e49, 0xa65d, 0x3fc9, 0x376d, 0x1b91, 0x2a6f, 0xc457, 0x144f, 0x0bd8, 0x639d, 0xad1a, 0xc3cb, 0xffe2, 0x1b72, 0xc98c,
    0x12eb, 0xc946, 0xd821, 0xaef6, 0x1c3a, 0xf6f5, 0x9536, 0x6672, 0x17d2, 0xa558, 0x09d1, 0x4882, 0x0836, 0xbe6e, 0x8419, 0x58ed,
    0x67e2, 0x9649, 0x2a10, 0xbb28, 0x9778, 0x0a2a, 0x8064, 0x61bc, 0xae2d, 0xc7e1, 0x91e4, 0xf08c, 0x8a75, 0xdae3, 0x4e22, 0xceac,
    0x45fa, 0xad31, 0xe8e0, 0x6efa, 0x1702, 0x7588, 0xde8e, 0x6763, 0x17c8, 0xbf42, 0xb93e, 0xa378, 0x4fcb, 0x364e, 0x29b9, 0x219c,
    0x8ce1, 0x284d, 0xc463, 0x207b, 0x7a0d, 0xa462, 0x22e0, 0xc380, 0xb4a9, 0xe990, 0x0f81, 0x7ee8, 0x05ab, 0xfe8c, 0x6417, 0x50a1,
    0xa3f6, 0xc145, 0x537a, 0x4b30, 0x8999, 0x0512, 0x4735, 0x40e8, 0xea04, 0xa808, 0x84fe, 0xbf0a, 0xf176, 0x6184, 0x9615, 0x764c,
    0x2957, 0xcf72, 0x8a2f, 0x80b9, 0xbc61, 0xa900, 0x9dfd, 0x25e1, 0xb5b0, 0xe182, 0x95cb, 0x9b8f, 0x31a9, 0xb96f, 0xf229, 0x0dc6,
    0x1bb9, 0x0247, 0x6551, 0x07ec, 0x9bdd, 0x63fb, 0xcb7c, 0xc00d, 0x0a39, 0x9377, 0x4109, 0x1aee, 0x441b, 0x5ddb, 0x04f3, 0xb7df,
    0xacfb, 0x3321, 0x13f1, 0xc257, 0x7275, 0x5442, 0x0439, 0x7d15, 0xcb4b, 0xf73a, 0x4bf2, 0x4b5b, 0xe2f2, 0xd6a6, 0xc713, 0x6316,
    0x2691, 0xf6dd, 0xbd1e, 0xc774, 0x0471, 0x355d, 0x09b7, 0x2ee4, 0x0bf0, 0x4bb5, 0x0c1c, 0xd068, 0x6fe7, 0x1b14, 0xafea, 0x112d,
    0x3c9d, 0x5024, 0x2673, 0x143f, 0x7ba8, 0x10cc, 0xcc77, 0xbc37, 0xff56, 0xafc6, 0x3d01, 0xddb3, 0x6943, 0xd98a, 0x1456, 0x12c1,
    0xe36c, 0x5933, 0xa837, 0xbbc1, 0x7e91, 0x7cd2, 0x1d87, 0x5a43, 0xeb5a, 0xe75d, 0x2c2e, 0xe32c, 0x1973, 0xea9b, 0x3797, 0xe16b,
    0x7c22, 0xed77, 0xac4a, 0x8290, 0xb75e, 0x2d7a, 0xa673, 0x11e7, 0xf657, 0x3794, 0xe268, 0x4c3c, 0xf2a4, 0x804b, 0x4e93, 0x7f1d,
    0xe155, 0x421c, 0x3ce6, 0x2b5f, 0xe56c, 0x3f09, 0xf7ad, 0xdc65, 0xae9e, 0x7452, 0x155f, 0x0ac3, 0x698d, 0x1744, 0x33ce, 0xfc1e,
    0xd493, 0xd030, 0x37bf, 0xc943, 0xdd24, 0xfed4, 0x3c4f, 0x82f6, 0xd138, 0x2ebc, 0x53a8, 0x99e2, 0x7ed2, 0x3f91, 0x6f35, 0xc9c6,
    0x58a1, 0x2bae, 0x149d, 0xd90a, 0x94d6, 0x9799, 0xebcb, 0x76cc, 0xa9d7, 0x4a2a, 0x8288, 0xaf46, 0xbd81, 0x58eb, 0x61e4, 0xf675,
    0x15b6, 0xe32a, 0x1f75, 0x8aa7, 0x0831, 0xb969, 0xf42f, 0x6dfa, 0x241f, 0x5a45, 0xed5c, 0x8761, 0x1388, 0xbb2e, 0x917e, 0x6a16,
    0xbfc2, 0x39be, 0x2620, 0x476c, 0x19b1, 0x2859, 0xd077, 0x70f8, 0xfbd9, 0x6465, 0x22d3, 0xf0b3, 0xb54a, 0x1b78, 0xc386, 0xb2af,
    0x89ac, 0x3027, 0x26ea, 0x8da6, 0x7e01, 0xec42, 0x8874, 0xf9f4, 0x6b5e, 0xe681, 0xe1f9, 0xeeb0, 0x5890, 0x1a9f, 0x356a, 0x3e80,
    0x6f2f, 0xd3dc, 0xe84e, 0xc054, 0x5360, 0x512a, 0x3976, 0xeee8, 0x00c8, 0xc8c8, 0x47a4, 0xd179, 0x6ffd, 0x010e, 0x1f05, 0xfad7,
    0x7b60, 0xd804, 0x8bd3, 0x6d4e, 0x90ab, 0xaec8, 0x2204, 0x2764, 0x1223, 0x018e, 0x9f85, 0x7f8f, 0x73c7, 0xf7fb, 0x8a33, 0x9ca5,
    0x6cb2, 0x7d5c, 0x8202, 0x25cc, 0x989d, 0x10a6, 0xa61d, 0x7f89, 0x75c1, 0x97c7, 0xb595, 0xc4a7, 0xe4bf, 0xfdd1, 0x0a57, 0xfd19,
    0xc29f, 0xbabd, 0x13e6, 0xd540, 0x12e8, 0xca45, 0xe83f, 0xb125, 0x303b, 0x3af6, 0x5d75, 0xaa5d, 0xf3bd, 0x8859, 0xd4d9, 0x9a7a,
    0xd557, 0x05ff, 0xaad8, 0x7638, 0x5d23, 0xfc0b, 0xc186, 0x90b9, 0xbcda, 0x12bb, 0x9916, 0x8a26, 0x89b0, 0x2c3b, 0xf639, 0x59fa,
    0x61fe, 0xec6f, 0xa559, 0x08d0, 0x5888, 0x0287, 0xa591, 0xc018, 0x1f2c, 0xd3fe, 0xca6c, 0xc116, 0x0029, 0x2929, 0xb10c, 0x1912,
    0x8bfa, 0x4467, 0x21a7, 0xb7da, 0xa9fe, 0x6303, 0x3384, 0xb654, 0x367b, 0x1c8c, 0x4043, 0x41af, 0xbc48, 0x8029, 0x2cf1, 0x3cf3,
    0x3e4a, 0xa5e5, 0xb46c, 0x2c55, 0x9857, 0xda6c, 0xc1ad, 0xbb92, 0x2dc2, 0x1ecb, 0x2512, 0x4643, 0x2795, 0xe3d2, 0xe78d, 0xfcfe,
    0x3473, 0x3692, 0xf565, 0x36bb, 0xdc4c, 0x87b7, 0xc55e, 0x0c4d, 0x8139, 0x2dea, 0x36e3, 0x8414, 0x55e0, 0xb790, 0xe3b4, 0x81eb,
    0xff38, 0xc1a8, 0xbe97, 0x7de0, 0x3ebe, 0x5111, 0x024d, 0x6f5b, 0xa7a8, 0xdb37, 0x8bfd, 0x4360, 0x5191, 0x82cd, 0xea03, 0xaf0f,
    0xf4c8, 0x8a1d, 0xb28b, 0xad88, 0x5159, 0x4a05, 0xada7, 0x7e76, 0x9b35, 0x8b13, 0xad8e, 0x575f, 0x2a39, 0x9201, 0x2674, 0x1338,
    0x0b9e, 0x25db, 0x8f8a, 0x703b, 0x381a, 0x938f, 0xb9f1, 0x6cb7, 0x7859, 0xd220, 0x05b9, 0xec9e, 0x54a8, 0xeed3, 0x3bf3, 0x497b,
    0xe0c4, 0xc286, 0xa3a4, 0x9317, 0x2169, 0x7914, 0x8e66, 0x8ddc, 0x047b, 0x3f57, 0xa9f3, 0x6e0e, 0xe3f6, 0xc3a9, 0x9d80, 0x589c,
    0x1693, 0xf512, 0x41cc, 0xdf2b, 0xd3cd, 0xf95f, 0xc0f5, 0xf2c1, 0xe52e, 0x7d4b, 0x9515, 0x4551, 0x069a, 0xfca0, 0x6a2d, 0x84f9,
    0xb80d, 0x8140, 0x5493, 0xd5e8, 0xba40, 0xee1b, 0xf33b, 0x0edf, 0x31bd, 0xad7b, 0xa2aa, 0x8c12, 0xdbbe, 0x0274, 0x5662, 0x060f,
    0x6935, 0xaffc, 0x073b, 0x4c0a, 0xc492, 0xd18a, 0x9c0e, 0xc719, 0x691c, 0x86d5, 0xb637, 0x5518, 0x4f68, 0x95ed, 0xbda9, 0x70c3,
    0xc0e2, 0xe5d6, 0x85b3, 0xe34c, 0x7913, 0x8961, 0xfdea, 0x316c, 0x7caa, 0x65ff, 0xa942, 0xdfbf, 0x4759, 0x2c84, 0x4986, 0x1d39,
    0xe4fd, 0xbf93, 0x68ef, 0x642d, 0x6a9b, 0x324f, 0x6c94, 0x5b7a, 0xc368, 0x5c41, 0x8f62, 0x98d3, 0x5ee8, 0x04dd, 0x99f1, 0x6dc1,
    0x1f24, 0xdbf6, 0x4a3c, 0x949e, 0xdfd1, 0x2937, 0xaf12, 0xe9d5, 0x4ac4, 0x6c66, 0xa988, 0x1575, 0x20e9, 0xe89f, 0x1185, 0x9435,
    0x747a, 0x3d77, 0xabc5, 0x7a2e, 0x8741, 0x33a8, 0x9a78, 0xd755, 0x25eb, 0xbfba, 0x41c6, 0xd521, 0x7389, 0xb9b5, 0x28f3, 0x7add,
    0x74b2, 0xf5bf, 0xec61, 0xab57, 0xe8bc, 0x32a6, 0x857d, 0x2d82, 0x5e8b, 0x67be, 0xca15, 0xb86f, 0xe322, 0x177d, 0x0af7, 0x5db9,
    0x6691, 0xf431, 0x73e4, 0xd4d8, 0x9b7b, 0xc55d, 0x0f4e, 0xb127, 0x3239, 0x1ae2, 0x4817, 0x9da3, 0x7bbf, 0x07db, 0xacea, 0x2230,
    0x1350, 0x63f6, 0xc671, 0x107f, 0x7fc4, 0x388c, 0x0519, 0x4c3e, 0xf0a6, 0xa05f, 0x5bf1, 0x48e3, 0x6957, 0xcd9e, 0x44d5, 0x9315,
    0x236b, 0x5900, 0x9b04, 0xba22, 0x8c79, 0xb0d5, 0xd1c0, 0xd644, 0x25f1, 0xa5a0, 0xf129, 0x3edb, 0x3474, 0x3195, 0x8553, 0x03ac,
    0x9fb1, 0x4bbb, 0x0212, 0x3004, 0x05c9, 0x9cee, 0x27f9, 0x8fbe, 0x440f, 0x49cf, 0x5470, 0x360b, 0x6cfc, 0x3312, 0x20c2, 0xc3b4,
    0x809d, 0x9845, 0xc87e, 0xf112, 0x05e0, 0xb5c7, 0x96f5, 0x96ac, 0xcff5, 0x0da8, 0x75d7, 0x81d1, 0xc502, 0x5011, 0x1346, 0x75e0,
    0xb6e6, 0x84c9, 0x883d, 0xb0bd, 0xb9a8, 0x35ee, 0xba04, 0xaa5f, 0xf1bf, 0xa84d, 0xc1bb, 0xad84, 0x5d55, 0x8a7d, 0xd2eb, 0xce72,
    0x9b24, 0x9a02, 0xad2f, 0xf6fe, 0x9e3d, 0xd63c, 0x5d89, 0x56a1, 0xc5cc, 0x9edf, 0x34de, 0x9b3f, 0x8119, 0x0dca, 0x17b5, 0xc23f,
    0x1a1d, 0xb7e8, 0x9bcc, 0x72ea, 0xcbdd, 0x61ac, 0xbe3d, 0xd74a, 0x3af4, 0x5f77, 0x8a49, 0xe6df, 0xbfa7, 0x5cdb, 0x15f8, 0xad64,
    0xbdb5, 0x6cdf, 0x1031, 0x318a, 0x9a4c, 0xe361, 0x543e, 0x7845, 0xce3c, 0xd56a, 0x38c2, 0x4b57, 0xeefe, 0x16de, 0xb85f, 0xd312,
    0x2680, 0xe7cc, 0xbdbf, 0x66d5, 0xb075, 0x7160, 0x724a, 0x6b7d, 0xc5a2, 0xf0b1, 0xb748, 0x3b6c, 0xd6e4, 0x8551, 0x01ae, 0xbfa5,
    0x5ed9, 0x35ec, 0xb806, 0x8a4b, 0xe4dd, 0x9fb3, 0x49b9, 0x2206, 0x2566, 0x3237, 0x14ec, 0xa87b, 0xf78d, 0xfc45, 0x8fc8, 0x3279,
    0x5aa2, 0x0abb, 0x11f5, 0xe445, 0x072b, 0x5c1a, 0xd439, 0x7a9a, 0x33f5, 0xc725, 0x5520, 0x7750, 0x2440, 0x051a, 0x4f3d, 0xc0b8,
    0xbf8c, 0x77f0, 0x84e0, 0xa114, 0x01b1, 0xa0ba, 0xbe14, 0xfe63, 0x8bf8, 0x4665, 0x01b3, 0xa2b8, 0x9e00, 0xeb01, 0xbc06, 0xce67,
    0x8e31, 0xda8b, 0x264a, 0x2d06, 0xda0f, 0xa2ce, 0xe876, 0xf86c, 0xe2cd, 0xe999, 0x0688, 0xeeb2, 0x5a92, 0x3a8b, 0x2008, 0x097e,
    0xe72d, 0x5c5e, 0x907d, 0x781e, 0x9567, 0x3723, 0x55df, 0x88af, 0x222f, 0x0c4f, 0x833b, 0x0dfe, 0x2381, 0xb3ea, 0xdde2, 0x3812,
    0x9b87, 0x39a1, 0x393f, 0xa7a1, 0xd23e, 0x1ba7, 0x1c59, 0x9596, 0xc6d2, 0xb3dc, 0xebd4, 0x69d3, 0x491a, 0x81a5, 0xb176, 0x6368,
    0x58ef, 0x65e0, 0xb65d, 0x3f72, 0x8cd6, 0x1f7a, 0x85a8, 0xf857, 0xd9f6, 0x682a, 0xa1e8, 0xfd4d, 0x96cb, 0xa892, 0x1e64, 0x8abd,
    0x122b, 0x0986, 0x1fd5, 0x2a07, 0xac3f, 0xf7e5, 0x942d, 0x6c62, 0xad8c, 0x555d, 0x0a2d, 0x8763, 0x118a, 0x9b3a, 0x841c, 0x5de8,
    0x37c0, 0xb63c, 0x5e13, 0xff26, 0xdfb6, 0x4e50, 0xbcde, 0x16bf, 0xd93e, 0xa0e2, 0xe64c, 0x2c34, 0xf936, 0xa99c, 0x0161, 0x706a,
    0x694b, 0xd182, 0x9406, 0x4749, 0x3c94, 0x592d, 0xb629, 0x4b06, 0xbfaf, 0x54d3, 0x95a8, 0xf8ec, 0x624d, 0x6cc1, 0x0e2f, 0xc14d,
    0x5b72, 0xcb60, 0xdc11, 0xdaea, 0x472b, 0x5ef6, 0x1ac3, 0x6936, 0xacff, 0x3725, 0x53d9, 0xe893, 0x1d89, 0x544d, 0x0b36, 0x8d73,
    0xabd4, 0x6b3f, 0x87e0, 0x9209, 0x2e7c, 0x9368, 0x5e16, 0xfa23, 0x8f94, 0x6e25, 0xc8dd, 0x52b1, 0x91f0, 0xe498, 0xdaf6, 0x5b37,
    0x8e25, 0xce9f, 0x76c9, 0xacd2, 0x1a08, 0xa2fd, 0xdb45, 0xf98f, 0x1025, 0x259e, 0xcacf, 0x62b5, 0x9439, 0x7876, 0xfd0f, 0xd489,
    0xca2a, 0x8750, 0x22b9, 0x9ad9, 0x76f4, 0x91ef, 0xfb87, 0x3a3b, 0x90b8, 0xbddb, 0x02b1, 0x93a7, 0x91d9, 0xcdb1, 0x6bfa, 0x4225,
    0x05df, 0x8af8, 0x576e, 0x1b08, 0xb3f6, 0xc1fe, 0xe8c1, 0x4fdb, 0x265e, 0x3912, 0x8a8c, 0x231a, 0x2871, 0xf85f, 0xd1fe, 0xe87a,
    0xf460, 0x22b5, 0x96d5, 0xb68c, 0xeea3, 0x4b83, 0x3a2a, 0x81a9, 0xbd7a, 0xa310, 0x27a3, 0xd5e4, 0xb64c, 0x2e63, 0x8c77, 0xbedb,
    0x31ac, 0xbc6a, 0xa20b, 0x2db3, 0x6fba, 0x4649, 0x2d9f, 0x4396, 0xa767, 0x14f8, 0xbc6f, 0xa70e, 0x7d91, 0x4fcf, 0x324a, 0x6991,
    0x0b58, 0xe31d, 0x2842, 0xcb6c, 0xd01d, 0x1a92, 0x3867, 0xeef2, 0x1ad2, 0x7827, 0xac5e, 0x9684, 0xe7dd, 0xacae, 0x6674, 0x11d4,
    0xc564, 0x3677, 0x1080, 0x803b, 0x3ee3, 0x0c4c, 0x8038, 0x3de0, 0x3c52, 0x9feb, 0x11e1, 0xf051, 0x57a8, 0xddce, 0x143e, 0x7aa9,
    0x00c6, 0xc6c6, 0xa7c8, 0xbb57, 0xe807, 0x891d, 0x8196, 0x8245, 0x628b, 0xaa07, 0xa9e7, 0x7a1a, 0xb375, 0x427d, 0x5d87, 0x58af,
    0x25a0, 0xf4f1, 0xb324, 0x132c, 0x1f8a, 0x7558, 0x0e5e, 0xb03c, 0x3829, 0xa0bc, 0xb812, 0x9e5f, 0xb45e, 0x1e67, 0x89be, 0x2235,
    0x1655, 0x33d4, 0xe604, 0x647c, 0x3bca, 0x7042, 0x4163, 0x7084, 0x87a5, 0xd74c, 0x3cf2, 0x3f4b, 0xb5ef, 0xbedd, 0x37aa, 0xdc56,
    0x9dad, 0x75b1, 0xe7b7, 0xc6c4, 0xa5ca, 0x9b43, 0xfd65, 0xbee3, 0x0994, 0x0dc7, 0x1ab8, 0x124d, 0x6fe0, 0x1c13, 0xdfdc, 0x243a,
    0x7f60, 0x9c28, 0xe13f, 0x2876, 0xff58, 0xa1c8, 0xdd6d, 0xb79d, 0xeeb9, 0x5199, 0x8ac5, 0x6a53, 0xfa87, 0x2b30, 0x8a03, 0xac95,
    0x5d4f, 0x9067, 0x6204, 0x2588, 0xdcd9, 0x1222, 0x008f, 0x8f8f, 0x753e, 0x6838, 0xb3fa, 0xcdf2, 0x28b9, 0x3097, 0x965a, 0x3903,
    0x9b9d, 0x23bb, 0x89d0, 0x4c5b, 0x95c3, 0x9387, 0xb1f9, 0xece7, 0x2dd1, 0x0dd8, 0x05a7, 0xf280, 0xa46f, 0x2fed, 0x13f2, 0xc154,
    0x426b, 0x4b91, 0x2838, 0xb116, 0x0308, 0x3b15, 0xaf9d, 0x665a, 0x3ffa, 0x045e, 0x1a72, 0xd887, 0x0850, 0xd808, 0x87df, 0xad36,
    0xefe7, 0x1ecc, 0x2215, 0x3675, 0x1282, 0xa02f, 0x2b81, 0x3bb2, 0x083a, 0xb262, 0x4461, 0x27a1, 0xd7e6, 0x9658, 0x3b01, 0xbb89,
    0x36d9, 0xbe2e, 0xc459, 0x1a41, 0xebb4, 0x09b3, 0x2ae0, 0x4bd8, 0x6171, 0x63e0, 0xd067, 0x60e8, 0xeb72, 0xcf75, 0x8d28, 0xf08f,
    0x8976, 0xeafd, 0x51f1, 0xe2ad, 0x89f9, 0x6572, 0x24cf, 0x8a95, 0x3a03, 0xa880, 0x0c76, 0xba02, 0xac59, 0x9183, 0x97eb, 0x99b9,
    0x2589, 0xddd8, 0x0228, 0x0a3e, 0x9470, 0x313f, 0x2ff9, 0x07e6, 0x91d7, 0xc3bf, 0x8b96, 0x280b, 0x8225, 0x02eb, 0xc9fd, 0x639a,
    0xaa1d, 0xb3fd, 0xcaf5, 0x588f, 0x0580, 0xd5a7, 0xf50f, 0x5cd1, 0x1ff2, 0x0d20, 0xfd5f, 0x84d9, 0x982d, 0xa016, 0x12b8, 0x9a15,
    0xba38, 0x9663, 0x003a, 0x3a3a, 0x91b9, 0xadd1, 0x0800, 0x8858, 0xd5d8, 0x8a70, 0xdfe6, 0x1e00, 0xeed9, 0x31f9, 0xe93f, 0xa02e,
    0x2a80, 0x2bb8, 0x028b, 0xa99d, 0x0060, 0x6060, 0x63fa, 0xca7d, 0xd007, 0x0088, 0x8888, 0x0508, 0x5d2f, 0xf007, 0x01fe, 0xeff5,
    0x0cde, 0x12aa, 0x8807, 0x8a87, 0x2811, 0x983f, 0xb204, 0x2207, 0x2467, 0x223d, 0x1e5d, 0xb384, 0xb38c, 0xbb84, 0x3bd4, 0x6e5c,
    0xb1a4, 0xb1ba, 0xafa4, 0x5f63, 0x9e5d, 0xb65c, 0x3e73, 0x9cdc, 0x15cb, 0x9e57, 0xbc56, 0x9e37, 0xdc36, 0xfdcd, 0x164b, 0x2dca,
    0x16c3, 0xa542, 0x13cb, 0xf86d, 0xe3cc, 0xf993, 0x0c39, 0xf54d, 0x1e93, 0x7d4a, 0x9414, 0x555b, 0x0c2b, 0xe75f, 0x2e2c, 0xc338,
    0x0c11, 0xdd65, 0xbf95, 0x6ee9, 0x0411, 0x553d, 0x6a4d, 0xe499, 0xdbf7, 0x4b3d, 0x8494, 0xd560, 0x32c8, 0xeb13, 0xae14, 0xfed8,
    0x3043, 0x428e, 0xae74, 0x9eb8, 0x53b9, 0x88f3, 0x7e73, 0x9e30, 0xdb31, 0x8dfb, 0x235c, 0x6e37, 0xdacf, 0x620e, 0x2f82, 0x7c9d,
    0x52c8, 0xe889, 0x0793, 0xe4a2, 0xe0cc, 0xca8e, 0x23f4, 0xc69f, 0xfe91, 0x790a, 0x9078, 0x7d1b, 0xc545, 0x1756, 0x21dc, 0xcca1,
    0x6ae1, 0x4835, 0xbf81, 0x7afd, 0x5492, 0xd4e9, 0xaa4a, 0xe4aa, 0xe8c4, 0x4ade, 0x767c, 0x1967, 0xfe8f, 0x6714, 0x60bf, 0xbc25,
    0xed44, 0x9f79, 0x8373, 0x45b6, 0xe17d, 0x6a34, 0x9de0, 0x38fc, 0x7569, 0x3f6f, 0x91cb, 0xdfa3, 0x5b45, 0xfc57, 0x9dda, 0x02c6,
    0xe4d0, 0x92be, 0x99cb, 0x57fb, 0x8e9d, 0x7627, 0x423c, 0x1cc6, 0x0a09, 0xa347, 0x70f4, 0xf7d5, 0xa41d, 0x5d9f, 0x40b7, 0xb55b,
    0x0a69, 0xc327, 0x130e, 0x3da8, 0x741a, 0x5d17, 0xc83f, 0xb053, 0x5746, 0x3320, 0x12f0, 0xd25d, 0x78c4, 0x4fbd, 0x4038, 0x3ad4,
    0x7f57, 0xab1f, 0xa0f4, 0xf05a, 0x5ca3, 0x6d80, 0x5e65, 0x8950, 0xccdb, 0x109b, 0x9b20, 0x9e06, 0xed07, 0xdc3a, 0xf1c1, 0xd633,
    0x5286, 0xa6c7, 0xa553, 0x02da, 0xf8cc, 0x426d, 0x4d97, 0x4804, 0x8eb0, 0x5b0a, 0xb318, 0x2f10, 0xee0f, 0xe72f, 0x5e5c, 0xb069,
    0x6d7c, 0xa299, 0xbf21, 0xda5d, 0xf09c, 0x9a65, 0xca48, 0xe532, 0x6157, 0x45c6, 0x910d, 0x1965, 0xfc8d, 0x4700, 0x75dd, 0x8bdb,
    0x6546, 0x10fb, 0xfb40, 0xfdfc, 0x277a, 0x0c3d, 0xf149, 0x5ebb, 0x578e, 0xfbe8, 0x5554, 0x0324, 0x1739, 0x4eb3, 0x5f3d, 0xc003,
    0x0437, 0x731b, 0x2b27, 0x9d14, 0xcc08, 0xc348, 0x7c61, 0xae34, 0xdef8, 0x1115, 0x04a5, 0xe189, 0x9ec0, 0x2bc1, 0x7bf2, 0x4a96,
    0x3e34, 0xdb9b, 0x2751, 0x2716, 0x6051, 0x52cb, 0xeb8a, 0x378d, 0xfb71, 0xcccd, 0x068d, 0xebb7, 0x0ab0, 0x1afe, 0x540b, 0x4d70,
    0xafe3, 0x1824, 0xacc7, 0x0f1d, 0xe274, 0x5020, 0x2277, 0x5417, 0x516c, 0x7f30, 0xcc78, 0xb338, 0x0f30, 0xcf59, 0xa104, 0x11a1,
    0xb011, 0x1504, 0x5198, 0x8bc4, 0x7a59, 0xf036, 0x30cf, 0xce02, 0xeb54, 0xe953, 0xcc42, 0x8902, 0x9e89, 0x6288, 0xa904, 0x99f9,
    0x65c9, 0x9f74, 0x8e7e, 0x95c4, 0x9480, 0xc1cf, 0xd9f0, 0x6e2c, 0xc1d4, 0xc2eb, 0xcec9, 0x209f, 0x9ee9, 0x02e8, 0xcafe, 0x5384,
    0xb5ce, 0x9ffc, 0x06f6, 0x90cc, 0xc9af, 0x31c8, 0xd80e, 0x81d9, 0xcd0a, 0xd041, 0x46ce, 0xaa18, 0xb6f8, 0x9ad7, 0x78fa, 0x7183,
    0x91a9, 0xbdc1, 0x18ab, 0x2348, 0x7a23, 0x8a4c, 0xe3da, 0xef85, 0x7cae, 0x61fb, 0xe96a, 0xf57b, 0x28a5, 0x2c8b, 0x4689, 0xed5f,
    0x8462, 0x2396, 0xa4fd, 0xbd7f, 0xa615, 0x7781, 0xf591, 0xc24f, 0x6a6d, 0xc4b9, 0xfaa1, 0x0d16, 0xcb69, 0xd518, 0x4ab0, 0x1812,
    0x9af1, 0x5edc, 0x30e9, 0xe824, 0xaa3e, 0x90de, 0xdbbd, 0x0177, 0x667c, 0x19dc, 0x4534, 0x63ff, 0xcf78, 0x8025, 0x20fd, 0xfc8b,
    0x4106, 0x15e1, 0xb47d, 0x3d44, 0x98f6, 0x7bcd, 0x75a9, 0xffaf, 0x563f, 0x5b52, 0xeb40, 0xfd47, 0x9cc1, 0x08d6, 0x5e8e, 0x62bb,
    0x9a37, 0x981a, 0x9721, 0x5373, 0x4239, 0x19c3, 0x5a2b, 0x8332, 0x04f7, 0xb3db, 0xecd3, 0x19e5, 0x7c0d, 0xc258, 0x7d7a, 0xa424,
    0x64a6, 0xe110, 0x0759, 0x2e68, 0x877c, 0x0e95, 0x7bf7, 0x4f93, 0x6e16, 0xfbee, 0x5352, 0x6318, 0x289f, 0x16b1, 0xd730, 0x408e,
    0x8c62, 0xabce, 0x7125, 0x370f, 0x79f3, 0x6981, 0x1b48, 0xf3b6, 0x8352, 0x6497, 0xd021, 0x26ae, 0xc9e2, 0x7c85, 0x4ad0, 0x7872,
    0xf90b, 0x94a1, 0xe0ee, 0xe8ac, 0x22b6, 0x95d6, 0x8692, 0xf170, 0x6782, 0xf629, 0x49ea, 0x7155, 0x477f, 0x0aa2, 0x08ec, 0x64b4,
    0xf302, 0x37e6, 0x901a, 0x1f79, 0x86ab, 0xc849, 0xc625, 0x442b, 0x6deb, 0x350e, 0x5ae4, 0x4cfd, 0x3365, 0x57b5, 0xc0d3, 0xd4e7,
    0xa444, 0x04c6, 0x82ea, 0xcd24, 0xfe6f, 0x87f4, 0x861d, 0x7eff, 0x12bc, 0x9e11, 0xfa10, 0xbca7, 0x6fc6, 0x3a35, 0x9eb6, 0x5db7,
    0x689f, 0x145d, 0x19ca, 0x5322, 0x1368, 0x5bce, 0x77dc, 0xa8cc, 0x403a, 0x38d6, 0x5f43, 0xbe7d, 0x970a, 0x7858, 0xd321, 0x15b3,
    0xe62f, 0x4f57, 0xaad2, 0x7c32, 0xfd67, 0xbce1, 0x2980, 0x18a5, 0x2d46, 0x9a4f, 0xe062, 0x6420, 0x6796, 0xe23d, 0x1969, 0xf081,
    0x8778, 0x0a91, 0x3bdf, 0x6557, 0x01ea, 0xfbe1, 0x5c5d, 0x937e, 0x4800, 0x8ab4, 0x1b22, 0x99dc, 0x40ec, 0xee00, 0xe820, 0xae3a,
    0xd0f6, 0xf179, 0x6e8b, 0x6673, 0x16d3, 0xb552, 0x0360, 0x537d, 0x4c37, 0xf9af, 0x3005, 0x04c8, 0x8ce4, 0x2d48, 0x9441, 0x000e,
    0x0e0e, 0xe06c, 0x6a2e, 0x87fa, 0x8813, 0x9e93, 0x7892, 0x19eb, 0x7203, 0x2234, 0x1754, 0x23de, 0xecb5, 0x7f83, 0x7fcb, 0x3783,
    0xf57f, 0x2ca1, 0x6ca3, 0x6c4d, 0x82a3, 0x846d, 0x2c99, 0x549b, 0xdde0, 0x3a10, 0xbb93, 0x2cc3, 0x0ec1, 0x2fa3, 0x5dbc, 0x6394,
    0xa413, 0x5391, 0xa0db, 0xdf75, 0x8d93, 0x4b34, 0x8d9d, 0x453a, 0x6df1, 0x2f14, 0xea0b, 0xa707, 0x7498, 0xdf95, 0x6d73, 0xad96,
    0x4f47, 0xbac2, 0x6c99, 0x5677, 0x131a, 0x29bc, 0x2499, 0xdcc3, 0x0838, 0xb060, 0x6475, 0x32c3, 0xe018, 0x1e5a, 0xb483, 0xc3ba,
    0x8e93, 0x7829, 0xa250, 0x76e8, 0x8df3, 0x2b54, 0xee67, 0x8f47, 0xbdf6, 0x2f9c, 0x6283, 0xa20f, 0x29b7, 0x2f92, 0x6c8d, 0x4263,
    0x4399, 0xa868, 0xe49e, 0xdcf0, 0x3b0b, 0xb183, 0x969d, 0xfec4, 0x2c5f, 0x925d, 0x7a28, 0x8147, 0x5394, 0xa5de, 0x8f57, 0xade6,
    0x3f37, 0xc993, 0x0df4, 0x298b, 0x13ae, 0x9d08, 0xd014, 0x139b, 0xa83d, 0xb1cb, 0xded5, 0x3c38, 0xf581, 0xd25f, 0x7ac6, 0x6fa9,
    0x555a, 0x0d2a, 0xf755, 0x249d, 0xd8c7, 0x4810, 0x9aa4, 0x0b89, 0x32cc, 0xef17, 0xee3c, 0xd41c, 0x5fbf, 0x4281, 0xa17b, 0x6ede,
    0x3326, 0x14f6, 0xb261, 0x4762, 0x17bf, 0xc835, 0xba59, 0xf702, 0x73ca, 0xfaf6, 0x5a41, 0xe958, 0xc749, 0x394c, 0xd4d2, 0x9171,
    0x6519, 0x4fa4, 0x5921, 0xba25, 0x8b7e, 0xc0e3, 0xe4d7, 0x95b9, 0xe9fd, 0x62ec, 0xcd60, 0xba2b, 0x8570, 0x208f, 0x8ef9, 0x1243,
    0x61ee, 0xfc7f, 0xb5f2, 0xa3c0, 0xf773, 0x02bb, 0x99ad, 0x319d, 0x8d5b, 0x83fc, 0xca39, 0x9443, 0x020c, 0x2e1a, 0xf50e, 0x5dd0,
    0x0ff8, 0x0791, 0xe6a0, 0xc0d8, 0xdfec, 0x140a, 0x4e9d, 0x7113, 0x0139, 0x2832, 0xbb1c, 0xa34c, 0x7bff, 0x479b, 0xee46, 0xae66,
    0x8caa, 0x6306, 0x3681, 0xe676, 0x160e, 0x688f, 0x044d, 0x0961, 0xf832, 0xbc93, 0x5bf2, 0x4be0, 0x5949, 0xd24d, 0x68d4, 0x5f16,
    0xeb28, 0x952f, 0x7f6b, 0x9723, 0x5171, 0x622d, 0x0ca1, 0x6dd5, 0x0b30, 0x8b75, 0xcbe8, 0x5499, 0xdfe2, 0x1a04, 0xaef1, 0x1b3d,
    0x86c3, 0xa021, 0x258f, 0xdbde, 0x6214, 0x3598, 0xcc72, 0xb932, 0xaf74, 0x8fb3, 0x4902, 0x99bd, 0x218d, 0x9df0, 0x28ec, 0x65c2,
    0x947f, 0x3e30, 0xdf9f, 0x6779, 0x0dd2, 0x0fad, 0x52c4, 0xe485, 0xc7eb, 0x9bee, 0x50c8, 0xca9f, 0x32e5, 0xc63e, 0x5f30, 0xcd0e,
    0xd445, 0x06e6, 0x80dc, 0xd904, 0x9ad8, 0x77f5, 0x81e5, 0xf136, 0x21c4, 0xd4b9, 0xfa1a, 0xb6ad, 0xcf82, 0x7adf, 0x76b0, 0xd5ab,
    0xf903, 0x9ca9, 0x60be, 0xbd24, 0xfd4e, 0x95c8, 0x988c, 0x01b7, 0xa6bc, 0xde28, 0xc1c5, 0xd3fa, 0xce68, 0x813e, 0x2aed, 0x46d5,
    0xb103, 0x161d, 0x7b9c, 0x24f8, 0xbda2, 0x7bc8, 0x70ac, 0xaf8d, 0x764a, 0x2f51, 0xaf4e, 0xb589, 0xd8bb, 0x346c, 0x298d, 0x15a8,
    0xfd34, 0xefb2, 0x4b99, 0x2030, 0x3146, 0x5680, 0xe4ed, 0xaf83, 0x7844, 0xcf3d, 0xc560, 0x3273, 0x50a8, 0xaaff, 0x511f, 0x0c43,
    0x8f37, 0xcd86, 0x5ccd, 0x03ee, 0xddf3, 0x2903, 0x9b26, 0x9800, 0x8d3b, 0xe39c, 0xa9c3, 0x5e3e, 0xd20b, 0x2e92, 0x7d86, 0x58d8,
    0x52d7, 0xf796, 0xe75e, 0x2f2d, 0xd332, 0x06a0, 0xc69a, 0xfb94, 0x2928, 0xb00d, 0x0918, 0x814b, 0x5f98, 0x65a6, 0xf01b, 0x1de2,
    0x3f26, 0xd882, 0x0d55, 0x882a, 0xa7aa, 0xd935, 0xabe9, 0x5602, 0x666f, 0x0acf, 0x6581, 0xd73c, 0x4c82, 0x4c1a, 0xd482, 0xc121,
    0x371e, 0x68e2, 0x6920, 0xbae9, 0x47b2, 0xc76f, 0x1f6a, 0x95b8, 0xe8fc, 0x72e6, 0xc7d1, 0xa1d4, 0xc171, 0x674e, 0x3ae5, 0x4e66,
    0x8ae8, 0x477e, 0x0ba3, 0x18e6, 0x6e05, 0xe8fd, 0x73e7, 0xd7db, 0xab65, 0xda8e, 0x234f, 0x7d24, 0xfa7a, 0xd6cd, 0xac78, 0xb0a2,
    0xa6b7, 0xd523, 0x718b, 0x99a1, 0x3d91, 0x4d23, 0xfcb0, 0x7a3d, 0x9452, 0x131d, 0x2ebb, 0x54af, 0xe9d4, 0x4bc5, 0x7c6c, 0xa339,
    0x0e8a, 0x64e8, 0xaf5e, 0xa599, 0xc810, 0x9f7c, 0x8676, 0x1594, 0xc108, 0x1e37, 0xd9ee, 0x7032, 0x3113, 0x03d5, 0xe6c8, 0xa8b0,
    0x3c46, 0x8bff, 0x4162, 0x7185, 0x97af, 0xddfd, 0x270d, 0x7b4a, 0xf22e, 0x0ac1, 0x6b8f, 0x3750, 0x26ac, 0xcbe0, 0x5c91, 0x5fb2,
    0x4f8c, 0x7109, 0x1b23, 0x98dd, 0x50e6, 0xe4b1, 0xf3df, 0xea3b, 0x9737, 0x4565, 0x32ae, 0x8d75, 0xadd2, 0x0b03, 0xb846, 0xca0b,
    0xa671, 0x13e5, 0xd643, 0x22f6, 0xd596, 0xc43e, 0x7d26, 0xf878, 0xf6d9, 0xb91a, 0x875c, 0x2eb5, 0x5aa1, 0x09b8, 0x21eb, 0xfb96,
    0x2b2a, 0x9019, 0x1c7a, 0xb6b5, 0xd79a, 0xea24, 0x8828, 0xa5a8, 0xf921, 0xbe8b, 0x61fc, 0xee6d, 0x854d, 0x1db2, 0x6f76, 0x8a85,
    0x2a13, 0xb82b, 0xa766, 0x15f9, 0xac65, 0xadbf, 0x666e, 0x0bce, 0x758b, 0xdd8d, 0x577d, 0x081b, 0x9343, 0x753d, 0x6b3b, 0x83e4,
    0xd221, 0x04b8, 0xfc94, 0x5e19, 0xf52c, 0x7ff2, 0x0eba, 0x54d8, 0x9ea3, 0x48a2, 0x2816, 0x9f38, 0xc232, 0x1710, 0x679a, 0xee31,
    0xd911, 0x8fcd, 0x377c, 0x0a80, 0x2ace, 0x65f6, 0xa04b, 0x4fe5, 0x1860, 0xe883, 0x0d99, 0x44e6, 0xa026, 0x2288, 0xabe8, 0x5703,
    0x7665, 0x007e, 0x7e7e, 0x933d, 0x0b43, 0xf806, 0x88a7, 0x2a27, 0x8c1f, 0xd6b3, 0xd206, 0x239f, 0xadf4, 0x2d25, 0xf92c, 0xb386,
    0xb18e, 0x9b90, 0x2eb6, 0x59a2, 0x39a6, 0x3e38, 0xd797, 0xe729, 0x585a, 0xd055, 0x52da, 0xfa9b, 0x372c, 0x5ad0, 0x78c9, 0x42b0,
    0x904a, 0x4f29, 0xd4ac, 0xef0f, 0xf624, 0x44e7, 0xa127, 0x3282, 0xa159, 0x4cfc, 0x3264, 0x47bf, 0xca62, 0xcf18, 0xe045, 0x4307,
    0x36f6, 0x9101, 0x1569, 0x3cf5, 0x384c, 0xc5d9, 0x8bca, 0x7457, 0x105a, 0x5ae1, 0x49f8, 0x6347, 0x77c0, 0xb4d0, 0x90e9, 0xec8a,
    0x40bc, 0xbe50, 0xba27, 0x897c, 0xe0f7, 0xf1b5, 0xa247, 0x61ff, 0xed6e, 0xb553, 0x0261, 0x4377, 0x4686, 0xe250, 0x7404, 0x4309,
    0x38f8, 0x716d, 0x7f47, 0xbb0f, 0xb05f, 0x5b4a, 0xf358, 0x6dbc, 0x6259, 0x78d5, 0x5eac, 0x4099, 0x9b75, 0xcb53, 0xef22, 0xdb09,
    0xb5c3, 0x92f1, 0xd684, 0xe531, 0x6254, 0x75d8, 0x8ede, 0x3564, 0x308e, 0x8f43, 0xb9f2, 0x6fb4, 0x4847, 0xcdf3, 0x29b8, 0x209d,
    0x9ceb, 0x22fc, 0xdf9c, 0x647a, 0x3dcc, 0x107e, 0x7ec5, 0x2886, 0x0fa8, 0x57c1, 0xb4a7, 0xe79e, 0xefed, 0x14c6, 0x8251, 0x769f,
    0xfa84, 0x2833, 0xba1d, 0xb346, 0x714e, 0x5c64, 0xaa47, 0xe9a7, 0x38b6, 0x3f23, 0xdd87, 0x5d77, 0xa85f, 0xd3a9, 0x9d3b, 0xe327,
    0x1278, 0x5ad5, 0x7dcc, 0x1292, 0xb03f, 0x3b2a, 0x90a2, 0xa7c1, 0xb25e, 0x785d, 0xd624, 0x4591, 0xc65a, 0x3b54, 0xeedc, 0x34fc,
    0xb91d, 0x805b, 0x5e83, 0x6fb6, 0x4a45, 0xede7, 0x3cda, 0x1763, 0x14e9, 0xad7e, 0xa7af, 0xdc30, 0xfbcb, 0x7677, 0x126c, 0x4ec1,
    0x2d4f, 0x9346, 0x7038, 0x3b19, 0xa391, 0xa622, 0x40b6, 0xb45a, 0x1a63, 0xc996, 0x08f1, 0x79a9, 0x33db, 0xe90b, 0x941a, 0x5b55,
    0xec47, 0x8d71, 0xa9d6, 0x4b2b, 0x9282, 0xa5f7, 0xa67e, 0x1cea, 0x2625, 0x4269, 0x4993, 0x082c, 0xa474, 0x34f6, 0xb317, 0x201f,
    0x1e69, 0x87b0, 0xc259, 0x7c7b, 0xb42e, 0x6e17, 0xfaef, 0x4358, 0x69a9, 0x3360, 0x52b0, 0x90f1, 0xf492, 0xd047, 0x40c8, 0xca24,
    0x895e, 0xc2d5, 0xf0f7, 0xf10e, 0x19fc, 0x6514, 0x42a9, 0x8953, 0xcfd8, 0x2085, 0x84f3, 0xb207, 0x2104, 0x1479, 0x3dee, 0x325c,
    0x7f87, 0x7bcf, 0x77ab, 0xdfbb, 0x435d, 0x6cac, 0x6342, 0x72c5, 0xe4f2, 0xb09c, 0x9889, 0x04b2, 0xf69e, 0xfe5d, 0xb5c6, 0x97f4,
    0x86a6, 0xc544, 0x1657, 0x31d6, 0xc610, 0x711e, 0x0c34, 0xf840, 0xcee1, 0x08b7, 0x3fef, 0x114b, 0x5afb, 0x53e2, 0xd3a8, 0x9c3a,
    0xf32d, 0x18c9, 0x412a, 0x39cd, 0x5553, 0x0423, 0x670f, 0x7ba4, 0x1cc0, 0x0c0f, 0xc37b, 0x4f52, 0xafd7, 0x2c10, 0xdd12, 0xc8e2,
    0x6d8e, 0x506b, 0x693c, 0xa6f5, 0x9761, 0x1333, 0x0095, 0x9595, 0xc5d1, 0x83c2, 0xf407, 0x45d2, 0x8519, 0x49e6, 0x7d59, 0x8707,
    0x75ee, 0xb8e8, 0x64a5, 0xe213, 0x3747, 0x31bb, 0xab7d, 0xc296, 0xb3b4, 0x83bc, 0x8a79, 0xd6ef, 0x8e5a, 0xb1e0, 0xf5fe, 0xad20,
    0xf9f1, 0x6e5b, 0xb6a3, 0xc18c, 0x9ab3, 0x1c9e, 0x5251, 0x7110, 0x023a, 0x182c, 0xa4cf, 0x8f4d, 0xb7fc, 0x8fd8, 0x2269, 0x4a09,
    0xa1ab, 0xbe0e, 0xe479, 0x3b17, 0xad9f, 0x464e, 0x2a98, 0x33a0, 0x9270, 0x5705, 0x7063, 0x6042, 0x41d8, 0xcb3f, 0x834e, 0x788b,
    0x00f2, 0xf2f2, 0xd61d, 0x7ca8, 0x67fd, 0x8956, 0xcadd, 0x70a7, 0xa486, 0xc604, 0x650a, 0x5cb7, 0x7994, 0x0ee6, 0x0884, 0x0cdc,
    0x10a8, 0xa813, 0x9fe5, 0x1fef, 0x103d, 0x3d86, 0x5a34, 0x9c2d, 0xe43a, 0x7854, 0xdf2d, 0xd5cb, 0x9963, 0xff53, 0xaac3, 0x6d23,
    0xfdc6, 0x1d40, 0x9d84, 0x5c98, 0x56bb, 0xdfd6, 0x2e30, 0xdf24, 0xdcc2, 0x0939, 0xa06a, 0x6ec4, 0x293c, 0xa419, 0x599b, 0x009f,
    0x9f9f, 0x6595, 0xc328, 0x1c01, 0xcdce, 0x1485, 0xc112, 0x042d, 0x6901, 0x9bc8, 0x76ee, 0x8bf5, 0x4b68, 0xd1c1, 0xd745, 0x35fb,
    0xaf11, 0xead6, 0x7ada, 0x73b5, 0x8589, 0xd976, 0xe8aa, 0x24b0, 0xf5ea, 0xb934, 0xa972, 0xef8f, 0x76a4, 0xc1bf, 0xa980, 0x1d7d,
    0xa0b9, 0xbd17, 0xce7d, 0x942b, 0x6a64, 0xcdb0, 0x6afb, 0x522f, 0x0f6e, 0x9107, 0x136f, 0x5cc9, 0x07ea, 0x9ddb, 0x03c7, 0xf4da,
    0x980f, 0x8234, 0x13fa, 0xc95c, 0xc23b, 0x1e19, 0xf7c0, 0xb108, 0x1d16, 0xcbd2, 0x6ea3, 0x4e5b, 0xb7d5, 0xa6f1, 0x9365, 0x531b,
    0x2a51, 0xfa69, 0xc5de, 0x8ccd, 0x0461, 0x254d, 0x191c, 0x85f4, 0xa40b, 0x4b89, 0x3020, 0x21ed, 0xfd90, 0x4b16, 0xafbf, 0x4478,
    0x3eb8, 0x5717, 0x6271, 0x50fd, 0xffaa, 0x533a, 0x0b70, 0xcb35, 0x8944, 0xd8cf, 0x4018, 0x1af4, 0x5e01, 0xed34, 0xef09, 0xf022,
    0x24db, 0x9e81, 0x6a80, 0x2954, 0xcc71, 0xba31, 0x9f6a, 0x9060, 0x6503, 0x55be, 0xe9ce, 0x51df, 0xcc83, 0x48c3, 0x4977, 0xecc8,
    0x02fe, 0xdce8, 0x2313, 0x2178, 0x6805, 0x8ec7, 0x2c7d, 0xb07f, 0x7b6a, 0xd20e, 0x2b97, 0x2da4, 0x78ad, 0x26d4, 0xb398, 0xaf90,
    0x6b57, 0xef88, 0x71a3, 0xb189, 0x9c97, 0x5e80, 0x6cb5, 0x7a5b, 0xf234, 0x10db, 0xdb60, 0xdcaa, 0x6151, 0x43c0, 0xf131, 0x26c3,
    0xa48f, 0xcf0d, 0xf550, 0x038e, 0xbd93, 0x4af9, 0x515b, 0x4807, 0x8db3, 0x6b14, 0xaccb, 0x0311, 0x220c, 0x2f6c, 0x9273, 0x5406,
    0x407d, 0x7f91, 0x6dd9, 0x073c, 0x4b0d, 0xb4a4, 0xe49d, 0xdff3, 0x0b15, 0xae50, 0xba9c, 0x32c7, 0xe41c, 0x5e72, 0x9e47, 0xac46,
    0x8e9c, 0x7726, 0x5236, 0x1677, 0x11f6, 0xe746, 0x3735, 0x43c9, 0xf838, 0xb699, 0xfbb6, 0x0b0a, 0xb14f, 0x5a51, 0xf948, 0xd7e2,
    0x925c, 0x7b29, 0x914d, 0x5925, 0xbe21, 0xcb56, 0xea27, 0x8b2b, 0x95b6, 0xe6f2, 0x928a, 0xadff, 0x262e, 0x4962, 0xf9dd, 0x4277,
    0x578d, 0xf8eb, 0x654a, 0x1cf7, 0x3b38, 0x82b0, 0x977e, 0x0c2c, 0xe058, 0x5e1a, 0xf62f, 0x4fec, 0x1169, 0x78d9, 0x52a0, 0x80e1,
    0xe439, 0x7b57, 0xef33, 0xca18, 0xb562, 0x3350, 0x6280, 0xa10c, 0x19a9, 0x3041, 0x408c, 0x8e60, 0x8bda, 0x6447, 0x00f1, 0xf1f1,
    0xe603, 0x637b, 0x4bfc, 0x4555, 0x029e, 0xbc88, 0x40e9, 0xeb05, 0xb802, 0x8e4f, 0xa4f5, 0xb577, 0x2645, 0x2209, 0x2a69, 0xc251,
    0x7473, 0x347e, 0x3b9f, 0x2517, 0x4346, 0x77b7, 0xc3a7, 0x938e, 0xb8f0, 0x7cbd, 0x72e8, 0xc9df, 0x41b8, 0xab5f, 0xe0b4, 0xb2f6,
    0xd0f5, 0xf27a, 0x5e95, 0x79a0, 0x3ad2, 0x7951, 0xcb23, 0x9f52, 0xa858, 0xd4ae, 0xed0d, 0xd630, 0x5185, 0x96d9, 0xba80, 0x2edb,
    0x34cf, 0x8a2e, 0x81b8, 0xac6b, 0xa3b1, 0x8602, 0x61e0, 0xf271, 0x559e, 0xc9ee, 0x7089, 0x8aa8, 0x073e, 0x490f, 0x94b0, 0xf1ff,
    0xe80d, 0x8317, 0x21d2, 0xc2af, 0x8a8d, 0x221b, 0x387b, 0xf2ee, 0xca01, 0xac7b, 0xb3a1, 0x96a9, 0xcaf0, 0x5d8a, 0x55a2, 0xf5d2,
    0x810c, 0x18df, 0x573c, 0x495a, 0xc1e5, 0xf3da, 0xef3e, 0xc715, 0x6510, 0x46ad, 0xc97b, 0xe51c, 0x4f79, 0x84fc, 0xbd08, 0xd162,
    0x74e6, 0xa1eb, 0xfe4e, 0xa6d5, 0xb741, 0x3265, 0x46be, 0xda68, 0xc5a9, 0xfbba, 0x0706, 0x7137, 0x251d, 0x494c, 0xd7f3, 0x834d,
    0x7b88, 0x30ec, 0xed21, 0xfa1c, 0xb0ab, 0xafbe, 0x4579, 0x2eb2, 0x5da6, 0x798e, 0x14fc, 0xb86b, 0xe726, 0x5755, 0x2033, 0x3245,
    0x669e, 0xfb3e, 0x8382, 0xb447, 0x077e, 0x094f, 0xd61c, 0x7da9, 0x77f7, 0x83e7, 0xd122, 0x34a6, 0xe347, 0x7218, 0x392f, 0xb7b1,
    0xc295, 0xb0b7, 0xb3a2, 0x95aa, 0xfaee, 0x4259, 0x79a3, 0x39d1, 0x494f, 0xd4f0, 0xb353, 0x645b, 0x1ced, 0x2122, 0x325f, 0x7c84,
    0x4bd1, 0x6878, 0xf3ba, 0x8f5e, 0xa4ef, 0xaf6d, 0x96aa, 0xc9f3, 0x6d94, 0x4a71, 0xd9d3, 0x4d0f, 0xd09c, 0x9b13, 0xad35, 0xece4,
    0x2ed2, 0x3dc6, 0x1a74, 0xde81, 0x686c, 0xe7ae, 0xdfdd, 0x253b, 0x6f6a, 0x9699, 0xfac0, 0x6c77, 0xb899, 0x15d4, 0x8148, 0x5c9b,
    0x55b8, 0xefc8, 0x31e3, 0xf325, 0x10c1, 0xc17a, 0x6c45, 0x8aab, 0x043d, 0x7911, 0x8b63, 0xddfe, 0x240e, 0x4b54, 0xedfd, 0x26c0,
    0xa78c, 0xff13, 0xea83, 0x2f8f, 0x7190, 0x82ba, 0x9d74, 0xac68, 0xa0b2, 0xb61c, 0x7e33, 0xde70, 0x999d, 0x01ad, 0xbca6, 0x6ec7,
    0x2a3f, 0x9407, 0x4648, 0x2c9e, 0x539c, 0xadd6, 0x0f07, 0xf86e, 0xe0cf, 0xc98d, 0x13ea, 0xd94c, 0xd290, 0xb509, 0x583b, 0xb134,
    0x212a, 0x3a57, 0xfcd4, 0x1e59, 0xb780, 0xf3a4, 0x9140, 0x5428, 0x6e53, 0xbeab, 0x41dc, 0xcf3b, 0xc366, 0x524f, 0x6f0e, 0xf2fd,
    0xd912, 0x8cce, 0x0762, 0x1553, 0x06cf, 0xa9f5, 0x6808, 0x83ca, 0xfc0f, 0xc582, 0xd091, 0x961e, 0x7d47, 0x9919, 0x8529, 0x79d6,
    0x4ca4, 0x6a3c, 0x95e8, 0xb8ac, 0x20e1, 0xe097, 0x91d5, 0xc1bd, 0xab82, 0x3d69, 0xb5db, 0x8ae9, 0x467f, 0x1ba9, 0x1257, 0x75fa,
    0xacfc, 0x3426, 0x63c7, 0xf740, 0x3188, 0x984e, 0xc375, 0x415c, 0x4fbb, 0x463e, 0x5ae8, 0x40f1, 0xf31d, 0x28f9, 0x70d7, 0xd4f6,
    0xb555, 0x0467, 0x234b, 0x7920, 0xba52, 0xfc09, 0xc384, 0xb0ad, 0xa9b8, 0x2545, 0x1114, 0x05a4, 0xf183, 0x9471, 0x303e, 0x3ff3,
    0x0d57, 0x8a28, 0x87be, 0xcc57, 0x9c17, 0xde00, 0xe9ed, 0x72fc, 0xddcb, 0x113b, 0x2a8b, 0x20b3, 0xb2c5, 0xe3c6, 0xf399, 0xac7d,
    0xb5a7, 0xf695, 0xf556, 0x0588, 0xddaf, 0x755f, 0x0959, 0xc00a, 0x0d3e, 0xe341, 0x741e, 0x5913, 0x8817, 0x9a97, 0x38ba, 0x332f,
    0x1dff, 0x223b, 0x185b, 0xd3b8, 0x8c2a, 0xe386, 0xb3d9, 0xeed1, 0x39f1, 0x696f, 0xf5a6, 0xf578, 0x2ba6, 0x1c95, 0x595a, 0xc15e,
    0x4861, 0xebd5, 0x68d2, 0x5910, 0x8b14, 0xaa89, 0x2769, 0x1f2e, 0xd1fc, 0xea78, 0xd474, 0x37d7, 0xa12b, 0x3e8e, 0x6121, 0x33b0,
    0x8260, 0x47ae, 0xdb73, 0xcfb9, 0x41e4, 0xf703, 0x72cb, 0xeafc, 0x50f0, 0xf2a7, 0x8348, 0x7e8d, 0x60ce, 0xcd54, 0x8e1f, 0xf4a5,
    0xe770, 0x0103, 0x1208, 0x2aa5, 0x0e9d, 0x73ff, 0xcfc3, 0x3b9e, 0x2416, 0x534c, 0x7d06, 0xd858, 0xd78f, 0xff31, 0xc8a1, 0x2ecd,
    0x22d9, 0xfab9, 0x150e, 0x5b92, 0x2b80, 0x3ab3, 0x1830, 0xb8d3, 0x5f9e, 0x63a0, 0x9027, 0x2244, 0x6724, 0x508f, 0x8dd8, 0x007f,
    0x7f7f, 0x8337, 0x01f2, 0xe3f9, 0xcca6, 0x6de6, 0x3803, 0x8a96, 0x3900, 0x989e, 0x13a5, 0x9603, 0x605a, 0x59c0, 0x5bc4, 0x7dd6,
    0x0888, 0x00d0, 0xd0d0, 0xd75f, 0x2fe1, 0x1ffe, 0x012c, 0x3d27, 0xfb95, 0x2829, 0xa007, 0x03a9, 0x9ab4, 0x1b99, 0x2267, 0x4407,
    0x41c7, 0xd420, 0x6383, 0xb304, 0x330c, 0x3edc, 0x3373, 0x41a3, 0xb044, 0x4051, 0x53bd, 0x8cf7, 0x3e5b, 0xb4f4, 0xb4cd, 0x8df4,
    0x2c53, 0x9e51, 0xba50, 0xfe0b, 0xe390, 0xa5cf, 0x9e46, 0xad47, 0x9e96, 0x7d97, 0x49c9, 0x5276, 0x5637, 0x535a, 0x6b10, 0xa8cf,
    0x4339, 0x08c8, 0x4090, 0x927c, 0x5b09, 0xb01b, 0x1f0e, 0xf1dc, 0xcb2e, 0x925f, 0x782a, 0xa153, 0x46f6, 0x9220, 0x0755, 0x2264,
    0x4704, 0x71d9, 0xcbf3, 0x4f82, 0x7f07, 0xfb4f, 0xf2f3, 0xd71c, 0x6ca2, 0x6d4c, 0x92a9, 0x8edc, 0x3766, 0x109a, 0x9a21, 0x8e0c,
    0xe7b6, 0xc7c5, 0xb5c0, 0x91f2, 0xe69a, 0xfae2, 0x4e55, 0xb9db, 0x469d, 0xf94b, 0xd4e1, 0xa242, 0x64fa, 0xbd4c, 0x9526, 0x7662,
    0x0779, 0x0e48, 0xa62a, 0x48be, 0x340a, 0x4feb, 0x166e, 0x08ef, 0x67b7, 0xc31c, 0x2835, 0xbc1b, 0xd37a, 0x4ee8, 0x0466, 0x224a,
    0x692a, 0xb0e3, 0xe7f6, 0x8785, 0xf76c, 0x1da4, 0x7960, 0xfa12, 0xbea5, 0x4fd2, 0x2f57, 0xa948, 0xd5b5, 0xe71d, 0x6c6e, 0xa180,
    0x9525, 0x7561, 0x3767, 0x119b, 0x8a2b, 0x84bd, 0xfc49, 0x83c4, 0xf201, 0x25ee, 0xbabf, 0x11e4, 0xf554, 0x078a, 0xfdbb, 0x603d,
    0x3ea7, 0x4808, 0x82bc, 0x9b72, 0xcc54, 0x9f14, 0xee1e, 0xf63e, 0x5efd, 0x11c8, 0xd978, 0xe6a4, 0xc4dc, 0x9fc4, 0x3ece, 0x2161,
    0x711c, 0x0e36, 0xd854, 0xdb83, 0x3f49, 0xb7ed, 0x9ec9, 0x22c8, 0xeba8, 0x15af, 0xfa33, 0x9f84, 0x7e8e, 0x63cd, 0xfd4a, 0x91cc,
    0xd8a4, 0x2b73, 0xc940, 0xde27, 0xceca, 0x239c, 0xaef7, 0x1d3b, 0xe6ff, 0x9f87, 0x7d8d, 0x53d3, 0xe299, 0xbdcd, 0x14a7, 0xe330,
    0x056f, 0x3a48, 0xe3cb, 0xfe94, 0x7c0f, 0xc05a, 0x5d6e, 0xb146, 0x5358, 0x6912, 0x88db, 0x565b, 0x3f36, 0xc892, 0x1dfe, 0x233a,
    0x0851, 0xd909, 0x97d5, 0xa787, 0xf418, 0x5acd, 0x65d4, 0x8269, 0x4ea7, 0x4b29, 0x9080, 0x85e3, 0xb31c, 0x2b14, 0xae27, 0xcdeb,
    0x31a0, 0xb066, 0x6273, 0x52ff, 0xdfbe, 0x4658, 0x3c8e, 0x4337, 0x06c6, 0xa0fc, 0xf852, 0xdcf3, 0x3808, 0x819d, 0x894e, 0xd2c5,
    0xe05c, 0x5a1e, 0xb607, 0x6528, 0x7e95, 0x78d6, 0x5daf, 0x7087, 0x84a6, 0xe752, 0x2321, 0x134a, 0x79ec, 0x769e, 0xfb85, 0x3839,
    0xb0ac, 0xa8b9, 0x354f, 0x1ba5, 0x1e5b, 0xb582, 0xd3b0, 0x8422, 0x63d6, 0xe651, 0x3129, 0x39ef, 0x7771, 0x0561, 0x3446, 0x03a7,
    0x94ba, 0xfbf5, 0x4849, 0xc3fd, 0xc9d4, 0x4ab3, 0x1b11, 0xaaef, 0x410f, 0x1ce8, 0x2427, 0x627d, 0x5cf1, 0x3fd2, 0x2c76, 0xbb74,
    0xcb24, 0x9855, 0xd86e, 0xe1b9, 0xaef0, 0x1a3c, 0x96c9, 0xaa90, 0x3e70, 0x9fdf, 0x25d5, 0x8184, 0x9057, 0x5234, 0x1475, 0x31e2,
    0xf224, 0x00cb, 0xcbcb, 0x77ba, 0xceaa, 0x43fc, 0xcd0d, 0xd746, 0x36f8, 0x9f0f, 0xf505, 0x56db, 0xbfb6, 0x4dca, 0x1559, 0x0cc5,
    0x09b1, 0x28e2, 0x6bcc, 0x7413, 0x541e, 0x5865, 0xef6a, 0x9341, 0x773f, 0x4b2f, 0x9686, 0xe5df, 0x8cba, 0x7316, 0x262a, 0x4d66,
    0xb9f5, 0x68b3, 0x3871, 0xf8e4, 0x6a45, 0xec91, 0x5ba7, 0x1eb5, 0x5b6c, 0xd57e, 0x2cd6, 0x1bd4, 0x6f2a, 0xd6d9, 0xb86c, 0xe021,
    0x2763, 0x1524, 0x71b8, 0xaa92, 0x3c72, 0xbfcb, 0x30b7, 0xb67a, 0x1855, 0xddb6, 0x6c46, 0x89a8, 0x3423, 0x66c2, 0xa762, 0x11fd,
    0xec4d, 0x877b, 0x0992, 0x0bc1, 0x7a84, 0x2deb, 0x37e2, 0x941e, 0x5f51, 0xac6f, 0xa7b5, 0xc62a, 0x4b24, 0x9d8d, 0x5591, 0xc6e1,
    0x80ef, 0xea37, 0x9b3b, 0x851d, 0x4de2, 0x3d71, 0xadc3, 0x1a12, 0xb8e7, 0x6baa, 0x1275, 0x57d8, 0xadbe, 0x676f, 0x1bc4, 0x7f3a,
    0xc672, 0x137c, 0x4fda, 0x275f, 0x2918, 0x803d, 0x38e5, 0x6c70, 0xbf9e, 0x65e2, 0xb45f, 0x1f66, 0x99b4, 0x2884, 0x0daa, 0x77d5,
    0xa1c5, 0xd060, 0x67ef, 0x9b44, 0xfa62, 0xced5, 0x3c83, 0x4e3a, 0xd6b4, 0xd501, 0x53a9, 0x98e3, 0x6ed8, 0x3520, 0x74ca, 0x8dc7,
    0x1f60, 0x9fb2, 0x48b8, 0x320c, 0x2fd7, 0x29c8, 0x50ed, 0xefba, 0x4391, 0xa060, 0x64ce, 0x8978, 0xe4f3, 0xb19d, 0x8883, 0x0e03,
    0xed61, 0xba5c, 0xf207, 0x23e8, 0xda83, 0x2e42, 0xad56, 0x8f87, 0x7d36, 0xe868, 0xe672, 0x120a, 0x28a7, 0x2e89, 0x669d, 0xf83d,
    0xb39c, 0xab94, 0x2b7f, 0xc54c, 0x1e5f, 0xb186, 0x9398, 0xaee6, 0x0c2a, 0xe65e, 0x3e26, 0xc989, 0x17ee, 0x9964, 0xf854, 0xdaf5,
    0x5834, 0xbe3b, 0xd14c, 0x5ac8, 0x60d1, 0xd24b, 0x6ed2, 0x3f2a, 0xd48e, 0xcd2d, 0xf766, 0x17ae, 0xd924, 0xbaf8, 0x56a3, 0xc7ce,
    0xbecb, 0x21bc, 0xacc1, 0x091b, 0x8248, 0x6f86, 0x7a75, 0xdc1a, 0xd1e1, 0xf765, 0x14ad, 0xe93a, 0xa52b, 0x7aa2, 0x0bcd, 0x7688,
    0xed93, 0x48ae, 0x241a, 0x5f40, 0xbd7e, 0xa714, 0x678b, 0xff20, 0xd9b0, 0x2e6c, 0x8378, 0x4ebd, 0x5133, 0x206f, 0x6e19, 0xf4e1,
    0xa334, 0x0387, 0xb49a, 0xdaa3, 0x0e62, 0x8c00, 0xc9ac, 0x32cb, 0xe810, 0x9e0a, 0xe10b, 0x1c42, 0x8e8d, 0x6637, 0x5297, 0xb7d6,
    0xa5f2, 0xa37b, 0x4cc8, 0x0650, 0x366a, 0x0d9d, 0x40e2, 0xe00e, 0x084c, 0xc414, 0x570c, 0x796a, 0xf018, 0x1ee1, 0x0f38, 0xc751,
    0x2154, 0x4429, 0x6fe9, 0x151a, 0x4f86, 0x7b03, 0xbb67, 0xd837, 0xb8e0, 0x6cad, 0x6243, 0x62cf, 0xee43, 0xab63, 0xdc88, 0x4373,
    0x4282, 0xa278, 0x5ec0, 0x2cf5, 0x38f7, 0x7e62, 0x8f21, 0xdb90, 0x2c5a, 0x9758, 0x2a0a, 0xa132, 0x2797, 0xe1d0, 0xc799, 0xe99c,
    0x038d, 0xbe90, 0x7ae7, 0x4e88, 0x6406, 0x41b0, 0xa357, 0x60e4, 0xe77e, 0x0f0d, 0xf264, 0x408b, 0x8967, 0xfbec, 0x5150, 0x430c,
    0x3dfd, 0x214f, 0x5f32, 0xcf0c, 0xf451, 0x1384, 0xb722, 0x5106, 0x155a, 0x0fc6, 0x39af, 0x3731, 0x47cd, 0xb810, 0x9c5d, 0x944a,
    0x0b05, 0xbe40, 0xaa37, 0x99d7, 0x4be7, 0x5e4e, 0xa27b, 0x5dc3, 0x1ceb, 0x2724, 0x5263, 0x4322, 0x13d3, 0xe075, 0x7337, 0x070b,
    0x7c3a, 0xf56f, 0x3cb1, 0x7c08, 0xc75d, 0x2d58, 0x8451, 0x10a5, 0xa51e, 0x4f97, 0x6a12, 0xbbc6, 0x7996, 0x0ce4, 0x2890, 0x19be,
    0x2756, 0x2011, 0x1067, 0x67dc, 0xa877, 0xfb81, 0x3c3d, 0xf084, 0x827d, 0x5ab3, 0x1baa, 0x1154, 0x45e4, 0xb32f, 0x1827, 0xafc4,
    0x3f03, 0xfda7, 0x7c21, 0xee74, 0x9c54, 0x9d43, 0x9b5f, 0xe179, 0x6e30, 0xddc8, 0x1238, 0x1a95, 0x3f60, 0x9ec4, 0x2fc5, 0x3bda,
    0x6052, 0x51c8, 0xdb94, 0x285e, 0xd770, 0x00ce, 0xcece, 0x2798, 0xeedf, 0x37ff, 0x8903, 0x9f88, 0x7282, 0xa3b5, 0x8206, 0x21c8,
    0xd8b5, 0x3a62, 0xc9e1, 0x7f86, 0x7ace, 0x67a1, 0xd50a, 0x58a2, 0x28ad, 0x2483, 0xc6d9, 0xb8d7, 0x5b9a, 0x2388, 0xbae3, 0x4db8,
    0x672b, 0x5f80, 0x7dbe, 0x60e0, 0xe37a, 0x4f25, 0xd8a0, 0x2f77, 0x8968, 0xf4e3, 0xa136, 0x2393, 0xa1f8, 0xed5d, 0x8660, 0x0382,
    0xb19f, 0x8a81, 0x2e17, 0xf803, 0x8da2, 0x7a05, 0xac6a, 0xa2b0, 0x9608, 0x6b51, 0xe98e, 0x119f, 0x8e2f, 0xc495, 0xd68d, 0xec38,
    0xf20e, 0x2ae1, 0x4ad9, 0x717b, 0x6951, 0xcb98, 0x24e9, 0xacb3, 0x7b69, 0xd10d, 0x1b89, 0x3277, 0x54ac, 0xead7, 0x7bdb, 0x63bf,
    0x8f38, 0xc289, 0xacab, 0x6371, 0x41f6, 0xe511, 0x4274, 0x548e, 0xc8f5, 0x7a99, 0x30f6, 0xf73b, 0x4af3, 0x5b51, 0xe843, 0xcd59,
    0x8312, 0x24d7, 0x928d, 0xaaf8, 0x5618, 0x7c75, 0xba20, 0x8e7b, 0x90c1, 0xc4a2, 0xe1ba, 0xadf3, 0x2a22, 0x891a, 0x8691, 0xf273,
    0x579c, 0xe9fa, 0x65eb, 0xbd56, 0x8f3c, 0xc68d, 0xec83, 0x49b5, 0x2e0a, 0xe51e, 0x4d7b, 0xa4e8, 0xa86a, 0xe69c, 0xfce4, 0x2e69,
    0x867d, 0x1e9f, 0x7146, 0x546c, 0x2a17, 0xbc2f, 0xe74e, 0x3f3d, 0xc399, 0xadb0, 0x6961, 0xfba8, 0x1514, 0x4188, 0x9b6f, 0xd149,
    0x5fcd, 0x30f3, 0xf23e, 0x1ad1, 0x7b24, 0x9c40, 0x8957, 0xcbdc, 0x60ad, 0xae37, 0xddfb, 0x210b, 0x1b76, 0xcd88, 0x52c3, 0xe382,
    0xb7dd, 0xaef9, 0x1335, 0x0693, 0xf5a9, 0xfa77, 0xdbc0, 0x7c0a, 0xc55f, 0x0d4c, 0x9133, 0x275b, 0x2d1c, 0xc015, 0x1221, 0x038c,
    0xbf91, 0x6aed, 0x4439, 0x7ff9, 0x05b1, 0xe496, 0xd4f8, 0xbb5b, 0xe40b, 0x4965, 0xfeda, 0x3241, 0x629a, 0xbb16, 0xa946, 0xdbbb,
    0x0771, 0x0640, 0x267a, 0x1d36, 0xebf2, 0x4ff5, 0x0870, 0xf828, 0xa689, 0xeb1d, 0xa01a, 0x1eb4, 0x5a6d, 0xc574, 0x2667, 0x002b,
    0x2b2b, 0x9118, 0x0c70, 0xbc04, 0xcc65, 0xae25, 0xcfe9, 0x11b4, 0xa504, 0x558d, 0xdafd, 0x503c, 0x3e6b, 0x84c4, 0x8530, 0x60cf,
    0xcc55, 0x9e15, 0xfe14, 0xfc8f, 0x4502, 0x55c9, 0x9eb9, 0x52b8, 0x98f9, 0x74c2, 0x85cf, 0x9f30, 0xca3a, 0x9740, 0x3212, 0x31c9,
    0xd90f, 0x91d3, 0xc7bb, 0xcbbe, 0x02cf, 0xedd9, 0x02e4, 0xc6f2, 0x93fc, 0xca82, 0x2ff8, 0x06e7, 0x81dd, 0xc90e, 0x9069, 0x6c0a,
    0xc5e4, 0xb6f7, 0x95d8, 0x889c, 0x111c, 0x0dac, 0x71d3, 0xc1f9, 0xefc6, 0x3fed, 0x1349, 0x7aef, 0x4680, 0xe456, 0x1438, 0x7caf,
    0x60fa, 0xf960, 0xffca, 0x335a, 0x688a, 0x0148, 0x5943, 0xd847, 0xc890, 0x1ffc, 0x032e, 0x1d33, 0xeef7, 0x1fd7, 0x2805, 0x8c2b,
    0xe287, 0xa3d3, 0xe460, 0x220e, 0x2d6e, 0xb267, 0x4164, 0x7783, 0xf793, 0xe25b, 0x7f0f, 0xf347, 0x72a3, 0x8294, 0xb35a, 0x6d52,
    0x8cb7, 0x7e1b, 0xf658, 0x389b, 0x120e, 0x2ca3, 0x6ea1, 0x4c59, 0x97c1, 0xb393, 0xa49b, 0xdb19, 0xa5d3, 0x825a, 0x7d94, 0x4aca,
    0x6268, 0x49e4, 0x7f5b, 0xa713, 0x608c, 0x8f16, 0xeca7, 0x6d91, 0x4f74, 0x89f1, 0x6d7a, 0xa49f, 0xdf1d, 0xe5fb, 0xa89e, 0x1268,
    0x4ac5, 0x6d67, 0xb982, 0x1fc4, 0x3b16, 0xac9e, 0x5644, 0x2029, 0x285f, 0xd671, 0x10c4, 0xc47f, 0x3c67, 0xaade, 0x703e, 0x3d1f,
    0xc3ad, 0x9984, 0x18b4, 0x3c57, 0x9aee, 0x41c3, 0xd024, 0x23ab, 0x99c0, 0x5cf0, 0x3ed3, 0x3c7c, 0xb1c5, 0xd0db, 0xdc54, 0x9faf,
    0x55a5, 0xf2d5, 0xf13a, 0x2dc8, 0x14c1, 0x8556, 0x06a9, 0xcf93, 0x6bce, 0x7611, 0x740a, 0x4d07, 0xd894, 0x1b43, 0xf8bd, 0x331c,
    0x2ecc, 0x23d8, 0xeab3, 0x1fbf, 0x406d, 0x6f81, 0x7d72, 0xac2c, 0xe4f6, 0xb498, 0xd8a1, 0x2e76, 0x9962, 0xfe52, 0xbac9, 0x6792,
    0xe639, 0x5941, 0xda45, 0xe884, 0x0a9e, 0x34d0, 0x9531, 0x6175, 0x67e4, 0x904f, 0x4a2c, 0x848e, 0xcf7a, 0x8227, 0x00e9, 0xe9e9,
    0x76f8, 0x9de3, 0x3bff, 0x4577, 0x20bc, 0xbdca, 0x13a0, 0x9306, 0x3078, 0x79b5, 0x2fc7, 0x39d8, 0x4046, 0x44aa, 0xec6a, 0xa05c,
    0x58f2, 0x78fd, 0x7684, 0xe19f, 0x88d6, 0x5b56, 0xef44, 0xbd6f, 0xb605, 0x672a, 0x5e81, 0x6db4, 0x6a51, 0xf885, 0x0b24, 0x9f61,
    0x9b6b, 0xd54d, 0x1fe5, 0x1a37, 0x9dc2, 0x1ade, 0x742b, 0x6c26, 0xe9c8, 0x57d9, 0xacbf, 0x7765, 0x1175, 0x64c5, 0x8273, 0x54bd,
    0xfbc6, 0x7b7a, 0xc21e, 0x3b3c, 0x86b4, 0xd756, 0x26e8, 0x8fa4, 0x5e15, 0xf920, 0xbf8a, 0x71f6, 0xe4dc, 0x9eb2, 0x59b3, 0x28b7,
    0x3e99, 0x7636, 0x532d, 0x1c67, 0xaba8, 0x1743, 0x34c9, 0x8c28, 0xe184, 0x93cd, 0xfbb3, 0x0e0f, 0xe16d, 0x7a24, 0x8d4b, 0x93ec,
    0xda92, 0x3f53, 0xadf7, 0x2e26, 0xc932, 0xac55, 0x9d8f, 0x5793, 0xe6f5, 0x958d, 0xddc9, 0x1339, 0x0a9f, 0x35d1, 0x853b, 0x6bc4,
    0x7c1b, 0xd44e, 0x0ded, 0x3092, 0x935f, 0x6921, 0xbbe8, 0x57b8, 0xcdde, 0x0495, 0xd1b9, 0xaf3d, 0xc6fa, 0x9bf4, 0x4ad2, 0x7a70,
    0xd91f, 0x81c3, 0xd710, 0x60ae, 0xad34, 0xede5, 0x3ed8, 0x3777, 0x018b, 0x9a80, 0x2fad, 0x53b2, 0x83f8, 0xce3d, 0xd46b, 0x28c8,
    0x41e6, 0xf501, 0x52df, 0xff9e, 0x670e, 0x7aa5, 0x0cca, 0x06be, 0xd884, 0x0b53, 0xe816, 0x980c, 0x8137, 0x23e4, 0xd68f, 0xee3a,
    0xd21a, 0x3f83, 0x7d27, 0xf979, 0xe6d3, 0xb3ab, 0x9ca3, 0x6ab4, 0x1d60, 0xbda4, 0x7dce, 0x1090, 0x902b, 0x2e48, 0xa75c, 0x2fc3,
    0x3ddc, 0x006e, 0x6e6e, 0x8396, 0xa053, 0x57fd, 0x889b, 0x161b, 0x7d9a, 0x44c4, 0x8204, 0x23ca, 0xf8a1, 0x2f00, 0xfe1f, 0xf784,
    0xf54c, 0x1f92, 0x6d40, 0x9ea5, 0x4ea4, 0x482a, 0xa09e, 0x9a30, 0x9f1d, 0xe717, 0x6664, 0x01c4, 0xd5cf, 0x9d67, 0xbf7b, 0x8007,
    0x02df, 0xfdc9, 0x124f, 0x6de2, 0x3c07, 0xcabe, 0x13c4, 0xf762, 0x13aa, 0x990c, 0x903c, 0x395f, 0xc7c1, 0xb1c4, 0xd1da, 0xcc5e,
    0x951e, 0x4e5a, 0xb6d4, 0xb6fb, 0x99d4, 0x48e4, 0x6e50, 0xbda8, 0x71c2, 0xd0e8, 0xef67, 0x9e4c, 0xa74d, 0x3ed2, 0x3d7d, 0xa1cf,
    0xda6a, 0xc7ab, 0xdbae, 0x1264, 0x46c9, 0xad1f, 0xc6ce, 0xafc0, 0x3b07, 0xbd8f, 0x56e5, 0x8188, 0x9c5b, 0x924c, 0x6b39, 0x81e6,
    0xf235, 0x11da, 0xcb6a, 0xd61b, 0x7aae, 0x07c1, 0xb6f0, 0x92df, 0xf8aa, 0x240b, 0x4e51, 0xbddf, 0x06b5, 0xd38f, 0xbb1d, 0xa24d,
    0x6bf5, 0x4d2a, 0xf5b9, 0xea67, 0xcb6b, 0xd71a, 0x6aa4, 0x0d70, 0xad0f, 0xd6de, 0xbf6b, 0x9017, 0x1274, 0x56d9, 0xbdb4, 0x6dde,
    0x003b, 0x3b3b, 0x81b3, 0xa760, 0x13ff, 0xcc59, 0x9219, 0x3e6c, 0x83c3, 0xf506, 0x55d8, 0x8fa8, 0x5219, 0x3958, 0xc0c6, 0xc1f2,
    0xe4cd, 0x8fa3, 0x5912, 0x8916, 0x8a9d, 0x320b, 0x28d0, 0x59fe, 0x65fa, 0xac47, 0x8f9d, 0x672c, 0x5887, 0x0d88, 0x55f7, 0xa087,
    0x8329, 0x1fec, 0x133e, 0x0d98, 0x45e7, 0xb02c, 0x2839, 0xb017, 0x1302, 0x31a4, 0xb462, 0x225b, 0x783b, 0xb042, 0x4657, 0x3381,
    0xb351, 0x6659, 0x3cf9, 0x3440, 0x05a1, 0xf486, 0xc453, 0x104b, 0x4bf0, 0x4959, 0xc2e6, 0xc3c4, 0xf0ed, 0xeb14, 0xa913, 0x8eee,
    0x0554, 0x0173, 0x6278, 0x59f4, 0x6ff0, 0x0c03, 0xcf77, 0x8f2a, 0xd09b, 0x9c14, 0xdd03, 0xd9f3, 0x6d2f, 0xf1ca, 0xdd38, 0xe2c8,
    0xec9c, 0x56aa, 0xcec7, 0x2e91, 0x7e85, 0x68c6, 0x4d04, 0xdb97, 0x2b5d, 0xe76e, 0x1f1d, 0xe2cf, 0xeb9b, 0x269c, 0xfbd0, 0x6d6c,
    0xb289, 0xaf8a, 0x714d, 0x5f67, 0x9a59, 0xf674, 0x14b7, 0xf320, 0x15c4, 0x9158, 0x4c30, 0xfea8, 0x4033, 0x31df, 0xcf19, 0xe144,
    0x530d, 0x3c47, 0x8afe, 0x5168, 0x7b34, 0x8c50, 0x99fc, 0x60cc, 0xcf56, 0xae0b, 0xe1c7, 0xd08e, 0x8901, 0x9d8a, 0x5296, 0xb6d7,
    0xb5f8, 0xa9ca, 0x5737, 0x4251, 0x71ab, 0xb981, 0x1cc7, 0x0b08, 0xb34d, 0x7a45, 0xec2a, 0xe01c, 0x1a5e, 0xf4ab, 0xe97e, 0xe16f,
    0x7826, 0xad5f, 0x868e, 0xed6c, 0xb751, 0x2275, 0x5615, 0x7178, 0x6a52, 0xfb86, 0x3b3a, 0x80b2, 0xb76a, 0x194e, 0xd7a6, 0xd618,
    0x79ad, 0x37df, 0xa923, 0xbede, 0x34a9, 0xec48, 0x827e, 0x59b0, 0x2bb4, 0x0e87, 0x69e5, 0x7f2c, 0xd064, 0x63eb, 0xdb6c, 0xd0a6,
    0xa129, 0x3c8c, 0x4135, 0x26d2, 0xb59e, 0xcfac, 0x54f1, 0xb78a, 0xf9ae, 0x3104, 0x14c2, 0x8655, 0x36b7, 0xd040, 0x47cf, 0xba12,
    0xbc49, 0x8128, 0x3cfb, 0x3642, 0x25b5, 0xe1e4, 0xf3ad, 0x9849, 0xc472, 0x316a, 0x7aac, 0x05c3, 0x96e4, 0x87bd, 0xcf54, 0xac09,
    0xc1d3, 0xc5ec, 0xbeff, 0x1588, 0xdd14, 0xcee4, 0x0db2, 0x6fcd, 0x313e, 0x2ef8, 0x17ec, 0x9b66, 0xd840, 0xcf97, 0x6fca, 0x3639,
    0x5ece, 0x22fb, 0xd89b, 0x144c, 0x08db, 0x5383, 0xb2c9, 0xefca, 0x33e1, 0xd331, 0x05a3, 0xf684, 0xe447, 0x0529, 0x7c0e, 0xc15b,
    0x4d64, 0xbbf7, 0x48a7, 0x2d13, 0xcf1a, 0xe247, 0x6313, 0x2394, 0xa6ff, 0x9d6b, 0xb377, 0x407f, 0x7d93, 0x4dcd, 0x125e, 0x7cf3,
    0x3ca6, 0x6b1f, 0xa7c0, 0xb35f, 0x6857, 0xdc95, 0x5e6e, 0x825b, 0x7c95, 0x5ac0, 0x68d9, 0x521b, 0x3b5a, 0xe0d2, 0xd490, 0xd333,
    0x07a1, 0xd690, 0xf125, 0x32d7, 0xf40c, 0x4ed9, 0x3557, 0x03bd, 0x8ea0, 0x4b1a, 0xa3b3, 0x8400, 0x41f4, 0xe713, 0x6260, 0x41ec,
    0xff0b, 0xf29b, 0xbf74, 0x8f08, 0xf2b9, 0x9d56, 0x8e4a, 0xa1f0, 0xe555, 0x0630, 0x560a, 0x6e67, 0x8a9f, 0x3009, 0x08c4, 0x4c9c,
    0x5204, 0x2445, 0x001f, 0x1f1f, 0xe0cd, 0xcb8f, 0x33fe, 0xcc2e, 0xe56e, 0x3d0b, 0xd7b9, 0xc907, 0x9960, 0xfc50, 0x9add, 0x72f0,
    0xd1c7, 0xd143, 0x55c7, 0x90b7, 0xb2d4, 0xf2d7, 0xf338, 0x0ddc, 0x01a3, 0xb2a8, 0x8eab, 0x4011, 0x13fd, 0xce5b, 0xb20d, 0x2b0e,
    0xb43d, 0x7d04, 0xda5a, 0xf79b, 0xea53, 0xff5f, 0xa6cf, 0xad5b, 0x828a, 0xad44, 0x9d95, 0x4d89, 0x561a, 0x7e77, 0x9a34, 0x9b19,
    0xa73f, 0x4ca0, 0x6e38, 0xd5c0, 0x9268, 0x4f1d, 0xe098, 0x9eda, 0x31db, 0xcb1d, 0xa16c, 0x79c9, 0x53bb, 0x8af1, 0x5e67, 0x8b52,
    0xeccf, 0x05f9, 0xacde, 0x1604, 0x6285, 0xa409, 0x498b, 0x1034, 0x348f, 0xca6e, 0xc314, 0x203d, 0x3c4b, 0x86f2, 0x9110, 0x0478,
    0x3c54, 0x99ed, 0x71dd, 0xcff7, 0x0faa, 0x55c3, 0x94b3, 0xf2fc, 0xd813, 0x9cc4, 0x0dd3, 0x0eac, 0x42ce, 0xee34, 0xdc14, 0xdfef,
    0x1709, 0x7e83, 0x6ec0, 0x2d38, 0xe431, 0x735f, 0x6f63, 0x9f90, 0x6a9a, 0x334e, 0x7c9e, 0x51cb, 0xd897, 0x1840, 0xc8a3, 0x2ccf,
    0x02cd, 0xefdb, 0x22f0, 0xd390, 0xa402, 0x4280, 0xa07a, 0x7ed4, 0x3997, 0x0f09, 0xf660, 0x00a3, 0xa3a3, 0x9410, 0x515f, 0x4c03,
    0xcd9b, 0x41d0, 0xc337, 0x031e, 0x2d03, 0xdf0a, 0xf2ec, 0xc803, 0x8c6f, 0xa6c3, 0xa157, 0x42f2, 0xd208, 0x2d91, 0x4d98, 0x470b,
    0x7ed6, 0x3b95, 0x2f1d, 0xe302, 0x375d, 0x2ba1, 0x1b92, 0x296c, 0xf449, 0x0b9c, 0x27d9, 0xaf9e, 0x6559, 0x0fe4, 0x1b8d, 0x3673,
    0x1484, 0xc013, 0x1427, 0x63b0, 0x8037, 0x32ef, 0xcc34, 0xff74, 0x8de4, 0x3c43, 0x8efa, 0x1140, 0x51f0, 0xe3ac, 0x99f3, 0x6fc3,
    0x3f30, 0xce94, 0x7dc2, 0x1c9c, 0x5053, 0x5104, 0x1758, 0x2fd2, 0x2ccd, 0x00cf, 0xcfcf, 0x3792, 0xe46e, 0x2c00, 0xcd02, 0xd849,
    0xc69e, 0xff90, 0x6900, 0x9ac9, 0x66e4, 0x8144, 0x5097, 0x95c0, 0x9084, 0x81e7, 0xf334, 0x01d0, 0xc1db, 0xcde4, 0x3eaf, 0x4000,
    0x02ec, 0xcefa, 0x13ac, 0x9f0a, 0xf000, 0x06f9, 0x9fc3, 0x39c9, 0x5157, 0x440b, 0x4dcb, 0x1458, 0x1ccf, 0x0300, 0x331d, 0x2fcd,
    0x33d2, 0xe002, 0x0440, 0x046c, 0x2840, 0xc96e, 0xf009, 0x0ff0, 0x0f99, 0x66f0, 0x9550, 0x0014, 0x1414, 0x5083, 0x81d4, 0xc007,
    0x0033, 0x3333, 0x01e3, 0xf2e8, 0xcc07, 0xcc47, 0x8c07, 0xceab, 0x42fd, 0xdd07, 0xddf7, 0x2d07, 0xdb0e, 0xb2c4, 0xe2c7, 0xe393,
    0xa6cc, 0xae58, 0xb294, 0xb297, 0xb194, 0x818a, 0x9e59, 0xb258, 0x7e5b, 0xb618, 0x7a37, 0x9e58, 0xb359, 0x6e51, 0xbca9, 0x61c8,
    0xda59, 0xf498, 0xda4d, 0xe08c, 0x8ace, 0x6158, 0x4ac9, 0x616b, 0x79fa, 0x6088, 0x8b12, 0xac8f, 0x4755, 0x2088, 0x89fe, 0x6275,
    0x54f9, 0xbf82, 0x79fe, 0x648c, 0xcb3a, 0x864b, 0x28a9, 0x2087, 0x86f1, 0x9213, 0x3466, 0x2387, 0xb5ec, 0xbdde, 0x07b4, 0xc385,
    0xb1ac, 0xb9b2, 0x2ff4, 0x0aeb, 0x41a5, 0xb642, 0x206d, 0x6c1b, 0xd4f5, 0xb656, 0x3479, 0x3c98, 0x5521, 0x7651, 0x344a, 0x0fab,
    0x54c2, 0x84b9, 0xf84d, 0xc3ec, 0xd8c5, 0x4a12, 0xbab0, 0x1eeb, 0x0532, 0x6715, 0x61be, 0xac2f, 0xe7f5, 0x8486, 0xc772, 0x0277,
    0x5561, 0x3611, 0x76e6, 0x83fd, 0xcb38, 0x8449, 0x08bd, 0x35e5, 0xb10f, 0x1a11, 0xbbe4, 0x5bb4, 0x0da6, 0x7bd9, 0x61bd, 0xaf2c,
    0xd7eb, 0x9b55, 0xeb73, 0xce74, 0x9d22, 0xfa3e, 0x9289, 0xaefc, 0x1630, 0x56b1, 0xd5dc, 0x8e74, 0x9fce, 0x34c4, 0x8125, 0x31f6,
    0xe630, 0x5048, 0x4a1f, 0xb7bd, 0xce99, 0x70cf, 0xccee, 0x25ae, 0xfaff, 0x5348, 0x7902, 0x9870, 0xfd4b, 0x90cd, 0xc8ae, 0x21c2,
    0xd2bf, 0x9a26, 0x890b, 0x9780, 0xf2d2, 0xf63d, 0x5dfe, 0x21d6, 0xc6ab, 0xcaa5, 0x08df, 0x5787, 0xf2e1, 0xc50e, 0x5c1d, 0xd33e,
    0x0aac, 0x06e2, 0x84d8, 0x992c, 0xb01c, 0x1809, 0x81ea, 0xfe39, 0xd1a2, 0xb426, 0x661f, 0x7abf, 0x16d0, 0xb651, 0x337e, 0x4cae,
    0x6036, 0x35ac, 0xf846, 0xc8e7, 0x688b, 0x0049, 0x4949, 0xd2f6, 0xd36f, 0x5bfd, 0x44ef, 0xa92f, 0xb2d2, 0xf4d1, 0x9304, 0x327a,
    0x59a1, 0x3aa5, 0x0e26, 0xc844, 0xcb28, 0x9459, 0x1816, 0x9ef5, 0x1ef4, 0x1a2d, 0x87d8, 0xaa31, 0x9fd1, 0x2bdb, 0x61e8, 0xfa79,
    0xd5ce, 0x9c66, 0xaf71, 0x8ab6, 0x1920, 0xb9c8, 0x558e, 0xd9fe, 0x6022, 0x21b8, 0xa8c5, 0x4933, 0xa88c, 0x007a, 0x7a7a, 0xd315,
    0x2187, 0x97fa, 0x88a8, 0x2528, 0x7c79, 0xb62c, 0x4e03, 0xef8d, 0x74a6, 0xe1ab, 0xbce2, 0x2a83, 0x28bb, 0x3295, 0xb64e, 0x2c61,
    0xac63, 0xabb9, 0x0652, 0x3468, 0x2d89, 0x5580, 0xd7f0, 0x804e, 0x4b96, 0x2f3f, 0xc120, 0x361f, 0x78e8, 0x6391, 0xa116, 0x03b3,
    0x80ae, 0xab76, 0xc99d, 0x03fa, 0xc9e7, 0x7980, 0x1af2, 0x5807, 0x8d08, 0xd0af, 0xa820, 0xacd6, 0x1e0c, 0xe2d5, 0xf181, 0x9673,
    0x102a, 0x2a91, 0x3aa9, 0x022a, 0x083c, 0xb464, 0x245d, 0x1807, 0x8fe4, 0x1e55, 0xbb8c, 0x33dc, 0xee0c, 0xe42c, 0x6e42, 0xafba,
    0x417d, 0x6e9a, 0x7762, 0x1672, 0x14f3, 0xb764, 0x1740, 0x37ca, 0xbc36, 0xfe57, 0xbfcc, 0x37b0, 0xc64c, 0x2d42, 0x9e4b, 0xa04a,
    0x4ee4, 0x086a, 0xe232, 0x1666, 0x00e7, 0xe7e7, 0x9694, 0xf7cd, 0xbc05, 0xcd64, 0xbe2f, 0xc558, 0x0a4b, 0xe105, 0x124c, 0x6ee1,
    0x0c19, 0xd56d, 0x3fc5, 0x3b61, 0xdbe9, 0x5523, 0x7453, 0x145e, 0x1ac9, 0x633c, 0x0cbb, 0x77cf, 0xbbdf, 0x608f, 0x8c15, 0xdcb9,
    0x7242, 0x6375, 0x45f2, 0xa539, 0x68b0, 0x3b72, 0xc8fa, 0x7596, 0xc090, 0x97a4, 0xd6f6, 0x9743, 0x3111, 0x01d7, 0xc6dc, 0xbdd2,
    0x0bb8, 0x03fd, 0xcee0, 0x09b6, 0x2fe5, 0x1bfa, 0x4104, 0x17e3, 0x9469, 0x2826, 0xaf08, 0xf3cf, 0xfa2b, 0x879c, 0xee75, 0x9d55,
    0x8d49, 0x91ee, 0xfa86, 0x2a31, 0x9a09, 0xa624, 0x46b0, 0xd466, 0x25c5, 0x9194, 0x80fc, 0xf924, 0xbb8e, 0x31de, 0xce18, 0xf14e,
    0x59bc, 0x27b8, 0xceff, 0x16a9, 0xcf28, 0xd075, 0x72fa, 0xdbcd, 0x7107, 0x152d, 0x78b1, 0x3ac8, 0x634b, 0x7bcc, 0x74a8, 0xefa5,
    0x5c8e, 0x40ad, 0xaf41, 0xba86, 0x28dd, 0x54f3, 0xb588, 0xd9ba, 0x2466, 0x233c, 0x0e57, 0xb935, 0xa873, 0xff85, 0x7c15, 0xda40,
    0xed81, 0x5abc, 0x14a5, 0xe132, 0x257b, 0x2f2a, 0xd435, 0x7696, 0xf38d, 0xb869, 0xe524, 0x7741, 0x3551, 0x05bb, 0xee9c, 0x74bc,
    0xfbb1, 0x0c0d, 0xc179, 0x6f46, 0xbab5, 0x1bee, 0x5510, 0x4760, 0x15bd, 0xe821, 0xaf3b, 0xc0fc, 0xfbc8, 0x7574, 0x2272, 0x5112,
    0x014e, 0x5f45, 0xb87b, 0xf736, 0x47fe, 0x8b23, 0x9dbe, 0x66a2, 0xc702, 0x7207, 0x2630, 0x577c, 0x091a, 0x8349, 0x7f8c, 0x70c4,
    0xc7e5, 0x95e0, 0xb0a4, 0xa0b1, 0xb51f, 0x4e2d, 0xc1a3, 0xb59c, 0xcdae, 0x74e5, 0xa2e8, 0xce50, 0xb906, 0x9b40, 0xfe66, 0x8efd,
    0x1647, 0x21c6, 0xd6bb, 0xda0e, 0xa3cf, 0xf87c, 0xf2dd, 0xf932, 0xad98, 0x4149, 0x5aae, 0x06b7, 0xd18d, 0x9b09, 0xb72f, 0x5c0b,
    0xc528, 0x7a3b, 0x9254, 0x7321, 0x111d, 0x0cad, 0x61d9, 0xcb48, 0xf439, 0x7bec, 0x5488, 0xcef3, 0x1aa5, 0x0f50, 0xaf39, 0xc2fe,
    0xdbdc, 0x6016, 0x158c, 0xd910, 0x8ecc, 0x2776, 0x0031, 0x3131, 0x21f7, 0xe78a, 0xfbf9, 0x4445, 0x0385, 0xb698, 0xfab7, 0x1b00,
    0xbbfe, 0x41ae, 0xbd49, 0x9023, 0x2640, 0x270c, 0x7a4b, 0xe224, 0x0070, 0x7070, 0x7351, 0x616d, 0x7ffc, 0x00b4, 0xb4b4, 0xf48d,
    0xcf58, 0xa005, 0x01ab, 0xbaa0, 0x0efb, 0x1599, 0xcc05, 0xce45, 0xac13, 0xdbc9, 0x7503, 0x5505, 0x5275, 0x5534, 0x6344, 0x74c3,
    0x84ce, 0x8f3a, 0xc08b, 0x8cbf, 0x7613, 0x7608, 0x6d13, 0xcdf6, 0x2cbd, 0x70bf, 0xbc9e, 0x56ff, 0x9b92, 0x2cb4, 0x79b6, 0x2cc4,
    0x09c6, 0x5f95, 0x68ab, 0x2069, 0x681f, 0x94dd, 0x9c92, 0x5b85, 0x3c97, 0x5a2e, 0x8637, 0x54d5, 0x93ae, 0x98d0, 0x5deb, 0x34c3,
    0x8622, 0x41c0, 0xd327, 0x13b5, 0x8613, 0x70f1, 0xf2d0, 0xf43f, 0x7dea, 0x34b4, 0xf155, 0x42a7, 0x875d, 0x2fb4, 0x4aab, 0x0309,
    0x3a14, 0xbf97, 0x6ceb, 0x2405, 0x405f, 0x5db3, 0x6c9b, 0x5475, 0x330e, 0x3cde, 0x1367, 0x54c1, 0x87ba, 0xc853, 0xdc3f, 0xf4c4,
    0x8611, 0x72f3, 0xd2c4, 0xe15d, 0x4a14, 0xbcb6, 0x7ed7, 0x3a94, 0x3f17, 0xe9b3, 0x2ca2, 0x6fa0, 0x5c53, 0x9d70, 0xa86c, 0xe09a,
    0x9cd8, 0x11cf, 0xde7f, 0x9692, 0xf1cb, 0xdc39, 0xf2c2, 0xe62d, 0x4d55, 0x8ac6, 0x6950, 0xca99, 0x34e3, 0xa602, 0x6096, 0x950c,
    0x5c48, 0x866b, 0x0889, 0x01d1, 0xc0da, 0xddee, 0x341e, 0x5bff, 0x46ed, 0x893b, 0xa7b0, 0xc32f, 0x1b06, 0xbdf8, 0x2192, 0x82ef,
    0xc821, 0xae4d, 0xa781, 0xf21e, 0x3af1, 0x5a72, 0xda6b, 0xc6aa, 0xcba4, 0x18d5, 0x5d36, 0xe91e, 0x810f, 0x1bdc, 0x6722, 0x5689,
    0xede4, 0x3fd9, 0x277d, 0x0b3a, 0x817f, 0x6bac, 0x1473, 0x37e4, 0x9218, 0x3f6d, 0x93c9, 0xffb7, 0x4e27, 0xcba9, 0x15d8, 0x8d44,
    0x9ce3, 0x2af4, 0x5fcc, 0x31f2, 0xe234, 0x1060, 0x60db, 0xd841, 0xce96, 0x7fc0, 0x3c88, 0x4531, 0x66fa, 0x9f5a, 0xa050, 0x54fe,
    0xb885, 0x09c8, 0x519b, 0x88c7, 0x4a47, 0xefe5, 0x1cce, 0x0201, 0x2317, 0x257c, 0x282d, 0xa403, 0x4381, 0xb070, 0x7465, 0x2268,
    0x4b08, 0xb1a1, 0xb4bf, 0xff86, 0x7f16, 0xea5e, 0xf252, 0x76bd, 0xd8a6, 0x2971, 0xe954, 0xcb45, 0xf934, 0xab9e, 0x2175, 0x6508,
    0x5eb5, 0x5980, 0x1b84, 0x3f7a, 0x84de, 0x9f2a, 0xd020, 0x27af, 0xd9e8, 0x7634, 0x512f, 0x3c73, 0xbeca, 0x20bd, 0xbccb, 0x03aa,
    0x99b7, 0x2b87, 0x3db4, 0x6806, 0x8dc4, 0x1c63, 0xafac, 0x576b, 0x1e0d, 0xe3d4, 0xe18b, 0x9cc2, 0x0bd5, 0x6e90, 0x7d68, 0xb636,
    0x5419, 0x5f62, 0x9f5c, 0xa656, 0x34c2, 0x8723, 0x51ca, 0xd996, 0x084a, 0xc212, 0x3730, 0x46cc, 0xa81a, 0x96ec, 0x8fb5, 0x4f04,
    0xf981, 0x1e2b, 0xc5f2, 0xa0e1, 0xe54f, 0x1c2a, 0xe6e5, 0x859d, 0xcd62, 0xb829, 0xa564, 0x35ed, 0xb907, 0x9a41, 0xee6c, 0x844c,
    0x0db8, 0x65c7, 0x917a, 0x6e12, 0xffea, 0x137a, 0x49dc, 0x4763, 0x16be, 0xd83f, 0xb0e8, 0xecfd, 0x37cb, 0xbd37, 0xee5d, 0xb57d,
    0x2c4f, 0x824d, 0x6a83, 0x2a57, 0xfc6f, 0xa5e2, 0xb36b, 0x5c63, 0xad40, 0x9991, 0x0da1, 0x7cde, 0x118b, 0x9a3b, 0x9416, 0x5759,
    0x2c3f, 0xf23d, 0x19d2, 0x4b3a, 0x8393, 0xa556, 0x07df, 0xa8ee, 0x6218, 0x3994, 0x0c0a, 0xc67e, 0x1f70, 0x8fa2, 0x5813, 0x991c,
    0x802c, 0x29f4, 0x6cd1, 0x1e3f, 0xd1e6, 0xf062, 0x649b, 0xdc2d, 0xe6d6, 0xb6ae, 0xcc81, 0x4ac1, 0x6963, 0xf9aa, 0x3500, 0x54ea,
    0xac91, 0x594b, 0xd04f, 0x48c0, 0x4a74, 0xdcd6, 0x1d2d, 0xf0e9, 0xef10, 0xe93b, 0xa42a, 0x6aa8, 0x017c, 0x6d77, 0xa992, 0x0f6f,
    0x9006, 0x0365, 0x5678, 0x1c15, 0xd9da, 0x4406, 0x40c6, 0xc42a, 0x6932, 0xa8fb, 0x770d, 0x791d, 0x876f, 0x1d86, 0x5b42, 0xfb50,
    0xedec, 0x37d1, 0xa72d, 0x5eb2, 0x5e87, 0x6bb2, 0x0a6d, 0xc723, 0x5326, 0x176c, 0x1be6, 0x5d18, 0xc730, 0x4035, 0x37d9, 0xaf25,
    0xdee2, 0x0b0f, 0xb44a, 0x0a73, 0xd93d, 0xa3e1, 0xd652, 0x33e7, 0xd537, 0x659f, 0xc922, 0xbc45, 0x8d24, 0xfc83, 0x490e, 0x95b1,
    0xe1f5, 0xe2bc, 0x98e8, 0x65d3, 0x856e, 0x3e91, 0x7e3e, 0xd37d, 0x49ef, 0x7450, 0x175d, 0x2ad7, 0x7cef, 0x20ba, 0xbbcc, 0x739c,
    0xaca0, 0x687a, 0xf1b8, 0xaf4a, 0xb18d, 0x9893, 0x1ea8, 0x4671, 0x15a7, 0xf23b, 0x1fd4, 0x2b06, 0xbc35, 0xfd54, 0x8fd2, 0x2863,
    0xea4d, 0xe141, 0x5608, 0x6c65, 0xaa8b, 0x256b, 0x3f3a, 0xc49e, 0xdd86, 0x5c76, 0xb855, 0xd918, 0x86c4, 0xa726, 0x55b9, 0xeec9,
    0x21e9, 0xf994, 0x0b3e, 0x857b, 0x2b84, 0x3eb7, 0x5818, 0x9217, 0x3062, 0x63af, 0x9f28, 0xd222, 0x07bb, 0xcc8a, 0x41ca, 0xd92d,
    0xb3f1, 0xc6f9, 0x98f7, 0x7acc, 0x65a3, 0xf51e, 0x4dc0, 0x1f53, 0xac81, 0x495b, 0xc0e4, 0xe3d0, 0xe58f, 0xdcea, 0x2111, 0x016c,
    0x7d67, 0xb939, 0xa47f, 0x3ffd, 0x0359, 0x6a44, 0xed90, 0x4bad, 0x1404, 0x4093, 0x917f, 0x6b17, 0xafc8, 0x330f, 0x3ddf, 0x036d,
    0x5e70, 0x9c45, 0x8c52, 0x9bfe, 0x40d8, 0xda34, 0x99f5, 0x69c5, 0x5f0c, 0xf132, 0x25c0, 0x9491, 0xd0de, 0xd951, 0xcf8d, 0x75d0,
    0x86d6, 0xb534, 0x6506, 0x50bb, 0xb9ec, 0x71aa, 0xb880, 0x0ccd, 0x01b9, 0xa8b2, 0x3e44, 0xabeb, 0x5400, 0x467b, 0x1fad, 0x527f,
    0x5f3e, 0xc300, 0x3429, 0x6cc8, 0x0726, 0x5117, 0x044b, 0x0f67, 0x980e, 0x8335, 0x03f0, 0xc3ed, 0xd9c4, 0x5a18, 0xb001, 0x0514,
    0x4133, 0x20d4, 0xd5a2, 0xf00a, 0x0cf3, 0x3f87, 0x7923, 0xb951, 0xcc17, 0xdc57, 0x9cac, 0x65bb, 0xed06, 0xdd3b, 0xe1cb, 0xdc82,
    0x4979, 0xe2c6, 0xe292, 0xb6c6, 0xa4e9, 0xa96b, 0xf696, 0xf655, 0x3596, 0xc27c, 0x595e, 0xc55a, 0x0849, 0xc111, 0x072e, 0x591f,
    0x841b, 0x5aef, 0x47f6, 0x832b, 0x1dee, 0x332a, 0x18fa, 0x7219, 0x382e, 0xa7bb, 0xc824, 0xab48, 0xf7a3, 0xd26b, 0x4ef2, 0x1e7c,
    0x92a5, 0x82d0, 0xf71e, 0x6fd6, 0x2a25, 0x8e1d, 0xf6a7, 0xc764, 0x1461, 0x25f6, 0xa2a7, 0x811f, 0x0bcc, 0x7789, 0xfd99, 0x421f,
    0x3fe5, 0x1b41, 0xfabf, 0x1308, 0x3bae, 0x1426, 0x62b1, 0x903d, 0x385e, 0xd7cb, 0xbb75, 0xca25, 0x885f, 0xd2df, 0xfa46, 0xeaf1,
    0x5dfd, 0x22d5, 0xf6b5, 0xd576, 0x24de, 0x9b84, 0x3aa2, 0x0921, 0xb872, 0xfe3f, 0xd7a4, 0xd41a, 0x59b9, 0x22bd, 0x9edd, 0x36dc,
    0xbb2b, 0x947b, 0x3a34, 0x9fb7, 0x4dbd, 0x622e, 0x0fa2, 0x5dcb, 0x14e3, 0xa774, 0x07eb, 0x9cda, 0x13cd, 0xfe6b, 0x83f0, 0xc635,
    0x543b, 0x7d40, 0x9e1e, 0xf51f, 0x4cc1, 0x0f59, 0xa630, 0x52a4, 0x84e5, 0xa411, 0x5193, 0x80cf, 0xca17, 0xba6d, 0xc336, 0x021f,
    0x3d09, 0xd5bb, 0xe913, 0x8c02, 0xcbae, 0x12df, 0xfd72, 0xa9f4, 0x6909, 0x93c0, 0xf6be, 0xde7d, 0x9490, 0xd1df, 0xc95b, 0xc53c,
    0x6e2f, 0xc2d7, 0xf2f5, 0xd11a, 0x0c9e, 0x52ea, 0xcaab, 0x06d1, 0xb7eb, 0x98cf, 0x42f4, 0xd40e, 0x4dad, 0x723e, 0x1f09, 0xf6db,
    0xbb18, 0xa748, 0x3bd7, 0x6d5f, 0x81ba, 0xae69, 0x83a5, 0x9360, 0x561e, 0x7a73, 0xda1c, 0xb1dd, 0xc8c3, 0x4caf, 0x6137, 0x25a6,
    0xf2f7, 0xd318, 0x2c8a, 0x4788, 0xfd55, 0x8ed3, 0x3869, 0xe0fc, 0xfabe, 0x1209, 0x2ba4, 0x1e97, 0x794e, 0xd43c, 0x7f9f, 0x63d7,
    0xe750, 0x2123, 0x335e, 0x6c8e, 0x4160, 0x7387, 0xb7bb, 0xc89f, 0x10f3, 0xf348, 0x7dac, 0x72f2, 0xd3c5, 0xf157, 0x40a5, 0xa749,
    0x3ad6, 0x7d55, 0x8b0b, 0xb596, 0xc7a4, 0xd4a1, 0xe202, 0x2656, 0x311a, 0x0adc, 0x7692, 0xf789, 0xf841, 0xcfe0, 0x18bd, 0x355e,
    0x0ab4, 0x1efa, 0x1423, 0x67b4, 0xc01f, 0x182b, 0xa3c8, 0xff7b, 0x82eb, 0xcc25, 0xee65, 0x8d45, 0x9de2, 0x3afe, 0x557d, 0x2a0d,
    0xa635, 0x57a1, 0xd4c7, 0x8464, 0x2590, 0xc4c1, 0x82d9, 0xfe17, 0xff8c, 0x751c, 0x4a1a, 0xb2b8, 0x9ebb, 0x50ba, 0xb8ed, 0x61a0,
    0xb231, 0x1732, 0x45b8, 0xef73, 0x8a58, 0xf7ce, 0xbf06, 0xfd7a, 0xa1fc, 0xe959, 0xc648, 0x2946, 0xde63, 0x8a8e, 0x2118, 0x0865,
    0xed3d, 0xe600, 0x6078, 0x7be2, 0x5a86, 0x2e9f, 0x708b, 0x88aa, 0x272a, 0x5c6d, 0xa34e, 0x79fd, 0x678f, 0xfb24, 0x9998, 0x04a8,
    0xec84, 0x4eb2, 0x5e3c, 0xd009, 0x0e86, 0x68e4, 0x6f26, 0xdad5, 0x7814, 0x9f6d, 0x9767, 0x1535, 0x60a9, 0xaa33, 0x9dd3, 0x0bcf,
    0x748a, 0xcd87, 0x5dcc, 0x13e4, 0xd742, 0x32fc, 0xdf27, 0xdfc1, 0x3927, 0xbfb9, 0x42c5, 0xe53f, 0x6c5a, 0x95b4, 0xe4f0, 0xb29e,
    0xb89d, 0x11d0, 0xc160, 0x765f, 0x3a44, 0xefc7, 0x3eec, 0x0343, 0x705e, 0x5d7f, 0xa057, 0x53f9, 0xc8b3, 0x3cdf, 0x1266, 0x44cb,
    0x8d0b, 0xd3ac, 0x983e, 0xb305, 0x320d, 0x2ed6, 0x39c2, 0x5a5c, 0xf445, 0x0790, 0xe7a1, 0xd0d2, 0xd55d, 0x0ff5, 0x0a9c, 0x36d2,
    0xb525, 0x7417, 0x501a, 0x184d, 0xc5ae, 0xfcbd, 0x7730, 0x4420, 0x66e0, 0x8540, 0x10bf, 0xbf04, 0xff78, 0x81e8, 0xfc3b, 0xf1b6,
    0xa144, 0x51e1, 0xf2bd, 0x9952, 0xce62, 0x8b34, 0x8aa9, 0x063f, 0x5905, 0x9e01, 0xea00, 0xac0c, 0xc4d6, 0x95ce, 0x9e8a, 0x618b,
    0x991a, 0x862a, 0x49c8, 0x5377, 0x463d, 0x59eb, 0x70ef, 0xecce, 0x04f8, 0xbcd4, 0x1cb5, 0x797a, 0xe008, 0x0e4a, 0xa428, 0x68aa,
    0x2168, 0x7815, 0x9e6c, 0x876d, 0x1f84, 0x7b56, 0xee32, 0xda12, 0xbfd3, 0x28af, 0x2681, 0xe6cd, 0xadb5, 0x6c64, 0xab8a, 0x3561,
    0x358b, 0xdf61, 0x9987, 0x1bb7, 0x0c49, 0x853d, 0x6dc2, 0x1c27, 0xebe8, 0x55ef, 0xb89f, 0x13d2, 0xe174, 0x633d, 0x0dba, 0x67c5,
    0xb16e, 0x7b70, 0xc814, 0x9b78, 0xc65e, 0x3f50, 0xaef4, 0x1e38, 0xd6e1, 0x8054, 0x518c, 0x9fd0, 0x2ada, 0x71e2, 0xf0c8, 0xce31,
    0xd867, 0xe8b0, 0x3eaa, 0x4505, 0x52ce, 0xee8f, 0x67af, 0xdb04, 0xb8ce, 0x4283, 0xa379, 0x4eca, 0x2644, 0x2308, 0x3a63, 0xc8e0,
    0x6f8c, 0x707f, 0x7c5e, 0x910b, 0x1f63, 0x9cb1, 0x78a6, 0x2ddf, 0x03d6, 0xe5cb, 0x98ae, 0x2395, 0xa7fe, 0x8d61, 0xb9c6, 0x5b80,
    0x3992, 0x0a0c, 0xa642, 0x20d6, 0xd7a0, 0xd01e, 0x1991, 0x0879, 0xf121, 0x36d3, 0xb424, 0x641d, 0x5aab, 0x03b2, 0x81af, 0xbb7c,
    0xc32c, 0x1805, 0x8de6, 0x3e41, 0xaeee, 0x0422, 0x660e, 0x6bae, 0x1671, 0x17f0, 0x877a, 0x0893, 0x1bcb, 0x7035, 0x3614, 0x73e3,
    0xd3df, 0xeb4d, 0xf04a, 0x4cb3, 0x7d2b, 0xf575, 0x26ab, 0xcce7, 0x2ca7, 0x6aa5, 0x0c71, 0xbd05, 0xdc6f, 0xa494, 0xd416, 0x55b5,
    0xe2c5, 0xe191, 0x86d8, 0xbb3a, 0x856a, 0x3a95, 0x3e16, 0xf9b9, 0x2613, 0x745f, 0x1852, 0xdab1, 0x1c70, 0xbcbf, 0x77de, 0xaace,
    0x602e, 0x2db4, 0x68bd, 0x367f, 0x1888, 0x006b, 0x6b6b, 0xd3b4, 0x8026, 0x23fe, 0xcc95, 0x5ed5, 0x39e0, 0x787e, 0xf507, 0x54d9,
    0x9fa2, 0x58a8, 0x22a7, 0x84c7, 0x8633, 0x50d1, 0xd386, 0xb214, 0x3217, 0x34cc, 0x892d, 0xb1a6, 0xb3b8, 0x8fb0, 0x4a01, 0xa9a3,
    0x3e5e, 0xb1f1, 0xe4ef, 0xad81, 0x5850, 0xda5f, 0xf29e, 0xba71, 0xdf2a, 0xd2cc, 0xe955, 0xca44, 0xe93e, 0xa12f, 0x3a8a, 0x2109,
    0x1974, 0xed9c, 0x47a1, 0xd47c, 0x3fdf, 0x217b, 0x6b06, 0xbed9, 0x33ae, 0x9c7e, 0xb769, 0x1a4d, 0xe7b8, 0xc9cb, 0x55ac, 0xfbdc,
    0x6160, 0x72f1, 0xd0c6, 0xc149, 0x5f76, 0x8b48, 0xf6d5, 0xb516, 0x4724, 0x51f9, 0xeaa5, 0x09a9, 0x30fa, 0xfb37, 0x8a8b, 0x241d,
    0x5847, 0xcd48, 0x9203, 0x2476, 0x332c, 0x1efc, 0x1225, 0x0788, 0xffb9, 0x4029, 0x2bc5, 0x7ff6, 0x0abe, 0x14f0, 0xb467, 0x275e,
    0x2819, 0x9037, 0x3254, 0x778f, 0xfb9f, 0x2223, 0x0043, 0x4343, 0x72b2, 0x9385, 0xb3fb, 0xccf3, 0x38b3, 0x3a26, 0x8da5, 0x7d02,
    0xdc5c, 0x97a7, 0xd5f5, 0xa75d, 0x2ec2, 0x2dd6, 0x0adf, 0x7591, 0xc797, 0xe792, 0xe3e1, 0xd4be, 0xfd1d, 0xc69b, 0xfa95, 0x3922,
    0xbabc, 0x12e7, 0xc54a, 0x1859, 0xd1ba, 0xac3e, 0xf6e4, 0x8427, 0x66d3, 0xb673, 0x115c, 0x4dec, 0x337f, 0x4daf, 0x703c, 0x3f1d,
    0xe3b9, 0x8ce6, 0x2f4a, 0xb455, 0x156c, 0x39f0, 0x686e, 0xe5ac, 0xffc9, 0x3059, 0x5894, 0x1e9b, 0x7542, 0x1444, 0x00d3, 0xd3d3,
    0xe741, 0x3032, 0x33ff, 0xcd2f, 0xf564, 0x37ba, 0xcc46, 0x8d06, 0xdea1, 0x484c, 0xc6f8, 0x99f6, 0x6ac6, 0x6f12, 0xeee1, 0x09c1,
    0x5892, 0x189d, 0x157e, 0x2be2, 0x58d1, 0x5bde, 0x67cc, 0xb867, 0xeb2a, 0x972d, 0x5f7f, 0x8241, 0x668f, 0xea2f, 0x8323, 0x15e6,
    0xb37a, 0x4d72, 0xade1, 0x3830, 0xb9a5, 0x38e3, 0x6a76, 0xdfa2, 0x5a44, 0xec5d, 0x976b, 0x1939, 0xa0d1, 0xd57f, 0x2dd7, 0x0bde,
    0x659b, 0xcd26, 0xfc6d, 0xa7e0, 0x937f, 0x4901, 0x9abe, 0x1193, 0x8223, 0x04ed, 0xa9c1, 0x5c3c, 0xf21f, 0x3bf0, 0x4a78, 0xd0da,
    0xdd55, 0x8fa5, 0x5f14, 0xe92a, 0xb53b, 0x6a09, 0xa0dd, 0xd973, 0xedaf, 0x7492, 0xd59f, 0xcd37, 0xed7c, 0xa741, 0x32de, 0xfd05,
    0xde83, 0x6a6e, 0xc7ba, 0xcabf, 0x12c5, 0xe768, 0x191b, 0x82f3, 0xd43d, 0x7e9e, 0x73dd, 0xede1, 0x3adc, 0x775f, 0x2b4f, 0xf57c,
    0x2fa2, 0x5cbd, 0x739e, 0xaea2, 0x486e, 0xe4da, 0x98b4, 0x398f, 0x1711, 0x669b, 0xfe3b, 0xd3a0, 0x9432, 0x737d, 0x4d41, 0x9ed2,
    0x39d3, 0x4b4d, 0xf4e4, 0xa631, 0x53a5, 0x94ef, 0xaea0, 0x4a6c, 0xc4ce, 0x8dd6, 0x0e71, 0x9f13, 0xe919, 0x8608, 0x6bea, 0x5235,
    0x1574, 0x21e8, 0xf895, 0x1b34, 0x8fca, 0x307b, 0x7ab6, 0x1fd9, 0x260b, 0x6c47, 0x88a9, 0x2429, 0x6c73, 0xbc9d, 0x55fc, 0xab8c,
    0x3367, 0x55b7, 0xe0c7, 0xc185, 0x93ba, 0x8cc4, 0x0d68, 0xb517, 0x4625, 0x41f3, 0xe014, 0x1256, 0x74fb, 0xbcf6, 0x3e97, 0x7838,
    0xb341, 0x7649, 0x2c52, 0x9f50, 0xaa5a, 0xf4ba, 0xf86f, 0xe1ce, 0xd987, 0x195b, 0xc2b3, 0x9691, 0xf2c8, 0xec27, 0xed11, 0xca2c,
    0x8156, 0x4285, 0xa57f, 0x2ef6, 0x19e2, 0x7b0a, 0xb26e, 0x486d, 0xe7d9, 0xa8aa, 0x265c, 0x3b10, 0xaa98, 0x3678, 0x1f8f, 0x705d,
    0x5e7c, 0x9049, 0x4c2a, 0xe4b2, 0xf0dc, 0xda25, 0x88e4, 0x6964, 0xfead, 0x4536, 0x61fd, 0xef6c, 0x9547, 0x1703, 0x7489, 0xce84,
    0x6dd2, 0x0c37, 0xfb43, 0xfeff, 0x1764, 0x13ee, 0xdd48, 0x92b8, 0x9fcd, 0x37c7, 0xb13b, 0x2e25, 0xca31, 0x9c4b, 0x825c, 0x7b92,
    0x2af6, 0x5dce, 0x11e6, 0xf756, 0x279e, 0xe8d9, 0x57c3, 0xb6a5, 0xc78a, 0xfa8f, 0x2338, 0x0a53, 0xf91d, 0x82b7, 0x9079, 0x7c1a,
    0xd54f, 0x1de7, 0x3a23, 0x88a0, 0x2d20, 0xfc29, 0xe3a4, 0x91fb, 0xef93, 0x6ab8, 0x116c, 0x7ddc, 0x0282, 0xa094, 0x903a, 0x3f59,
    0xa7fd, 0x8e62, 0x89d8, 0x4453, 0x1593, 0xc60f, 0x6e01, 0xecf9, 0x33cf, 0xfd1f, 0xc499, 0xda81, 0x2c40, 0x8d42, 0x9ae5, 0x4ac8,
    0x606a, 0x69f0, 0x6a39, 0x90ed, 0xe88e, 0x0094, 0x9494, 0xd5db, 0x8973, 0xeff8, 0x01d3, 0xc2d8, 0xfdfa, 0x217c, 0x6c01, 0xceef,
    0x06b9, 0xdf83, 0x7b65, 0xdd01, 0xdbf1, 0x4d3b, 0xe4a8, 0xeac6, 0x6aca, 0x631e, 0x2e99, 0x768d, 0xe896, 0x188c, 0x046f, 0x2b43,
    0xf970, 0xefda, 0x23f1, 0xc39a, 0xaeb3, 0x597f, 0xe47b, 0x3915, 0x8d8b, 0x532c, 0x1d66, 0xbba2, 0x1df2, 0x2f36, 0xc829, 0xa645,
    0x27d1, 0xa796, 0xe509, 0x5a6c, 0xc475, 0x366d, 0x0a9a, 0x30d4, 0xd519, 0x4bb1, 0x0818, 0x9040, 0x4523, 0x74e8, 0xafe5, 0x1e22,
    0xccfb, 0x30bb, 0xba76, 0xd82d, 0xa2fa, 0xdc42, 0x89b9, 0x2532, 0x6663, 0x06c3, 0xa5f9, 0xa870, 0xfc86, 0x4c0b, 0xc593, 0xc180,
    0x96bf, 0xdce6, 0x2d1d, 0xc114, 0x022b, 0x093d, 0xa46e, 0x2eec, 0x03f8, 0xcbe5, 0x5994, 0x0f90, 0x6ff9, 0x050a, 0x5f2d, 0xd013,
    0x149c, 0xd80b, 0x84dc, 0x9d28, 0xf034, 0x32cd, 0xee16, 0xfe36, 0xdead, 0x4440, 0x0680, 0xe6ba, 0xdac2, 0x6f03, 0xfff0, 0x0960,
    0xf933, 0xac99, 0x5143, 0x501f, 0x1d48, 0x958c, 0xdcc8, 0x0333, 0x002e, 0x2e2e, 0xc13a, 0x2c05, 0xc807, 0x886b, 0xe6eb, 0x8b93,
    0x2d0e, 0xd207, 0x229e, 0xbdfe, 0x2794, 0xe2d3, 0xf787, 0xf64f, 0x2f8c, 0x7293, 0xb2a4, 0x82a7, 0x8069, 0x6cb1, 0x7e5f, 0xb21c,
    0x3a1f, 0xb49c, 0xdca5, 0x6e5e, 0xb3a6, 0x91ae, 0xbac6, 0x689d, 0x165f, 0x39de, 0x4640, 0x2496, 0xd3cc, 0xf85e, 0xd0ff, 0xf870,
    0xfed1, 0x394a, 0xd2d4, 0xf14d, 0x5abf, 0x17a6, 0xd12c, 0x3aa8, 0x032b, 0x1836, 0xbed5, 0x3fa2, 0x5c06, 0xc825, 0xaa49, 0xe7a9,
    0xd8da, 0x550d, 0x5a7d, 0xd564, 0x36cc, 0xab3b, 0x84d0, 0x9124, 0x304c, 0x4d81, 0x5e12, 0xfe27, 0xcfbc, 0x44e1, 0xa721, 0x52be,
    0x9eff, 0x14fe, 0xba69, 0xc732, 0x4237, 0x17cd, 0xba47, 0xe91c, 0x830d, 0x3bc8, 0x7240, 0x6177, 0x65e6, 0xb05b, 0x5f4e, 0xb370,
    0x4778, 0x0da5, 0x78da, 0x51a3, 0xb0ff, 0xfbea, 0x5756, 0x2330, 0x025b, 0x794d, 0xd73f, 0x4f81, 0x7c04, 0xcb51, 0xed20, 0xfb1d,
    0xa0a1, 0xa50f, 0x5e86, 0x6ab3, 0x1a67, 0xcd92, 0x48d9, 0x536d, 0x5c27, 0xe904, 0x9b15, 0xab33, 0x8cd8, 0x1174, 0x65c4, 0x9279,
    0x5e0c, 0xe039, 0x3f7b, 0x85df, 0x8f20, 0xda91, 0x3c50, 0x9de9, 0x31f5, 0xe533, 0x6056, 0x55cc, 0x9bbc, 0x029a, 0xb88c, 0x00c1,
    0xc1c1, 0xd7fe, 0x8e40, 0xabfa, 0x4511, 0x46da, 0xbe0c, 0xe67b, 0x1b03, 0xb8fd, 0x71b0, 0xa29a, 0xbc22, 0xea43, 0xef4f, 0xb664,
    0x064b, 0x2d71, 0xad78, 0xa1a9, 0xbc0c, 0xc46d, 0x2e75, 0x9a61, 0xce4c, 0xa51a, 0x4b93, 0x2a3a, 0x9102, 0x166a, 0x0ceb, 0x279f,
    0xe9d8, 0x47c9, 0xbc14, 0xdc75, 0xbe8e, 0x64f9, 0xbe4f, 0xa538, 0x69b1, 0x2b78, 0xc24b, 0x6e69, 0x8491, 0xd065, 0x62ea, 0xcb66,
    0xda17, 0xbad6, 0x788d, 0x06f4, 0x92ce, 0xe9bb, 0x24aa, 0xeff0, 0x09db, 0x4288, 0xa872, 0xfe84, 0x6c1f, 0xd0f1, 0xf67e, 0x1ebd,
    0x5364, 0x552e, 0x795e, 0xc42c, 0x6f34, 0xc8c7, 0x48ab, 0x211f, 0x0f62, 0x9d0b, 0xd317, 0x2385, 0xb7ee, 0x9dca, 0x12d6, 0xf47b,
    0x39ae, 0x3630, 0x57c7, 0xb2a1, 0x87a2, 0xd04b, 0x4cc4, 0x0a5c, 0xf612, 0x72d1, 0xf0e6, 0xe01f, 0x195d, 0xc4b5, 0xf6ad, 0xcd6e,
    0xb425, 0x651c, 0x4aa1, 0x0903, 0x9a50, 0xff7d, 0x84ed, 0xac19, 0xd1c3, 0xd547, 0x15ef, 0xba73, 0xdd28, 0xf2d8, 0xfc37, 0xfdba,
    0x613c, 0x2ead, 0x42b9, 0x9943, 0xdf73, 0x8b95, 0x2b08, 0xb23b, 0x1d38, 0xe5fc, 0xaf99, 0x625e, 0x7fd2, 0x2e9a, 0x758e, 0xd888,
    0x075f, 0x286e, 0xe740, 0x3133, 0x23f5, 0xc79e, 0xee9b, 0x73bb, 0x8b87, 0x391a, 0x8284, 0xa34a, 0x7df9, 0x27a7, 0xd1e0, 0xf664,
    0x04a7, 0xe38b, 0xbed4, 0x3ea3, 0x4c0c, 0xc294, 0xb1b6, 0xa3a8, 0x9f1b, 0xe111, 0x0658, 0x3e62, 0x8dcd, 0x156a, 0x3ff6, 0x0852,
    0xda0a, 0xa7cb, 0xb854, 0xd819, 0x96ce, 0xad97, 0x4e46, 0xaac8, 0x6628, 0x4d88, 0x571b, 0x6e7d, 0x9085, 0x80e6, 0xe33e, 0x0b61,
    0xda24, 0x89e5, 0x796e, 0xf41c, 0x5ec9, 0x25fc, 0xa8ad, 0x215b, 0x4b26, 0x9f8f, 0x7585, 0xd383, 0xb711, 0x6235, 0x14b9, 0xfd2e,
    0xf5a8, 0xfb76, 0xcbca, 0x76bb, 0xdea0, 0x494d, 0xd6f2, 0x9347, 0x7139, 0x2b13, 0xa920, 0xbddd, 0x04b7, 0xf39b, 0xae7f, 0x95b3,
    0xe3f7, 0xc2a8, 0x8d8a, 0x522d, 0x0d6c, 0xb113, 0x060d, 0x6b37, 0x8fe8, 0x1259, 0x7bf4, 0x4c90, 0x5e08, 0xe43d, 0x7f53, 0xaf1b,
    0xe0dc, 0xda9e, 0x335f, 0x6d8f, 0x516a, 0x7936, 0xac44, 0x8c9e, 0x5732, 0x4754, 0x2189, 0x99f4, 0x68c4, 0x4f06, 0xfb83, 0x3e3f,
    0xd090, 0x971f, 0x6d4d, 0x93a8, 0x9ed6, 0x3dd7, 0x0b65, 0xde20, 0xc9cd, 0x53aa, 0x9be0, 0x5ec6, 0x2af3, 0x58cb, 0x41c4, 0xd723,
    0x539d, 0xacd7, 0x1f0d, 0xf2df, 0xfb30, 0x8d8c, 0x542b, 0x6d50, 0x8eb5, 0x5e0f, 0xe33a, 0x0f65, 0x9a0c, 0xa321, 0x1692, 0xf413,
    0x51c6, 0xd59a, 0xc832, 0xbd5e, 0x8734, 0x46dd, 0xb90b, 0x964d, 0x2e14, 0xfb00, 0xbdbc, 0x65d6, 0x806b, 0x6eb3, 0x5e4b, 0xa77e,
    0x0de1, 0x3c9e, 0x5327, 0x166d, 0x0bec, 0x57a9, 0xdccf, 0x0434, 0x7018, 0x1b39, 0x82c7, 0xe009, 0x0f4b, 0xb422, 0x621b, 0x3a97,
    0x3c14, 0xd9ad, 0x3371, 0x43a1, 0x9050, 0x5533, 0x6443, 0x04f5, 0xb1d9, 0xccc7, 0x0c87, 0x4bf3, 0x4a5a, 0xf2f8, 0xdc17, 0xdcec,
    0x2717, 0x6150, 0x42c1, 0xe13b, 0x2c72, 0xbf70, 0x8b0c, 0xb291, 0xb792, 0xe1b6, 0xa1ff, 0xea5a, 0xf656, 0x3695, 0xf262, 0x468d,
    0xe95b, 0xc44a, 0x0952, 0xcb01, 0xbd70, 0xa91a, 0x87e7, 0x950e, 0x5e4a, 0xa67f, 0x1deb, 0x362f, 0x48d8, 0x526c, 0x4c2d, 0xe3b5,
    0x80ea, 0xef32, 0xcb19, 0xa568, 0x39e1, 0x797f, 0xe50d, 0x5e68, 0x845d, 0x1ca9, 0x6566, 0x30db, 0xda16, 0xbbd7, 0x6887, 0x0c45,
    0x8931, 0xadba, 0x636b, 0x5bec, 0x55fe, 0xa98e, 0x1373, 0x40d5, 0xd739, 0x4987, 0x1c38, 0xf4f7, 0xb522, 0x7310, 0x202c, 0x2d5a,
    0x8653, 0x30b1, 0xb07c, 0x7869, 0xe210, 0x3444, 0x01a5, 0xb4ae, 0xee97, 0x7fb7, 0x4bff, 0x4656, 0x3280, 0xa35b, 0x6ce8, 0x2706,
    0x7041, 0x4260, 0x409a, 0x9876, 0xfb4d, 0xf0f1, 0xf708, 0x79c0, 0x5ab2, 0x1aab, 0x015e, 0x4f55, 0xa8d0, 0x5c26, 0xe805, 0x8b1f,
    0xa182, 0x9727, 0x5575, 0x2205, 0x2665, 0x0229, 0x0b3f, 0x847a, 0x3b8e, 0x3406, 0x43e7, 0xd616, 0x77a3, 0xd7b3, 0xc30d, 0x3924,
    0xbcba, 0x72db, 0xfaec, 0x405b, 0x59b7, 0x2cb3, 0x7eb1, 0x5cf2, 0x3cd1, 0x1c68, 0xa4a7, 0xe725, 0x5456, 0x102d, 0x2d96, 0x4a9f,
    0x373d, 0x4bc1, 0x7868, 0xe311, 0x244e, 0x0b14, 0xaf51, 0xaa96, 0x3876, 0xffe3, 0x1a73, 0xd986, 0x185a, 0xd2b9, 0x9c20, 0xe937,
    0xa826, 0xaad0, 0x7e30, 0xdd73, 0xa983, 0x1e7e, 0x90a7, 0xa2c4, 0xe27c, 0x5828, 0xa227, 0x019f, 0x8e94, 0x7f2e, 0xd266, 0x43ff,
    0xce0e, 0xe758, 0x292b, 0xb30e, 0x3906, 0x9e98, 0x7399, 0xa9a5, 0x3858, 0xd1cd, 0xdb49, 0xf583, 0xd05d, 0x5ad2, 0x7acb, 0x62a4,
    0x8528, 0x78d7, 0x5cae, 0x608d, 0x8e17, 0xfcad, 0x6720, 0x548b, 0xcdf0, 0x2abb, 0x1083, 0x8338, 0x0efd, 0x139f, 0xac39, 0xf1e3,
    0xf411, 0x53c4, 0xf58e, 0xdd50, 0x8aa0, 0x0f36, 0xc95f, 0xc138, 0x2e07, 0xe813, 0x9d09, 0xd115, 0x0391, 0xa28c, 0xaa34, 0x9ad4,
    0x7bf9, 0x419d, 0x8e7a, 0x91c0, 0xd4a8, 0xeb0b, 0xb60c, 0x6e23, 0xcedb, 0x328d, 0xae56, 0xbc9a, 0x52fb, 0xdbba, 0x0670, 0x164a,
    0x2ccb, 0x06c9, 0xaff3, 0x0834, 0xbc6c, 0xa40d, 0x4d8f, 0x501c, 0x1e4b, 0xa592, 0xc31b, 0x2f32, 0xcc2d, 0xe66d, 0x0d15, 0xc86a,
    0xe506, 0x5563, 0x3413, 0x56f2, 0x969f, 0xfcc6, 0x0c4b, 0x873f, 0x4dd6, 0x0945, 0xdc16, 0xdded, 0x371d, 0x6be1, 0x593e, 0xa53a,
    0x6bb3, 0x0b6c, 0xd729, 0x5997, 0x0c93, 0x5fe7, 0x1ad9, 0x732c, 0x1c10, 0xdcdf, 0x1424, 0x60b3, 0xb029, 0x2d3c, 0xe035, 0x3377,
    0x45a7, 0xf06c, 0x6a95, 0x3c41, 0x8cf8, 0x3154, 0x4492, 0xd452, 0x11f1, 0xe041, 0x4703, 0x76de, 0xbbc5, 0x7a95, 0x3cfa, 0x3743,
    0x35bf, 0xeb55, 0xe852, 0xdc48, 0x83b3, 0x8576, 0x2689, 0xeec5, 0x2de5, 0x39ec, 0x7472, 0x357f, 0x2b95, 0x2fa6, 0x58b9, 0x33b6,
    0x8466, 0x2792, 0xe4d5, 0x97bb, 0xc9e9, 0x778e, 0xfa9e, 0x3229, 0x0af2, 0x58bc, 0x36b3, 0xd444, 0x07e7, 0x90d6, 0xd3b5, 0x8127,
    0x33f4, 0xc624, 0x452a, 0x7de1, 0x3fbf, 0x411b, 0x08fc, 0x74a4, 0xe3a9, 0x9cf6, 0x3fe1, 0x1f45, 0xba97, 0x39cc, 0x5452, 0x1429,
    0x6dbe, 0x605b, 0x58c1, 0x4bce, 0x7767, 0x1377, 0x44d1, 0x9711, 0x6343, 0x73c4, 0xf4f8, 0xba2d, 0x8376, 0x40b3, 0xb15f, 0x4a41,
    0xe9e3, 0x7cf2, 0x3da7, 0x7b15, 0xad71, 0xa8a0, 0x2c56, 0x9b54, 0xea72, 0xde7e, 0x9793, 0xe1c1, 0xd688, 0xe93d, 0xa22c, 0x0a94,
    0x3eda, 0x3575, 0x219f, 0x8fe2, 0x1853, 0xdbb0, 0x0c7a, 0xb60e, 0x6c21, 0xeecf, 0x27ef, 0x99a8, 0x3498, 0xdd79, 0xa389, 0xbe3a,
    0xd04d, 0x4ac2, 0x6a60, 0xc9b4, 0x2ad3, 0x78eb, 0x6092, 0x9108, 0x1c60, 0xacaf, 0x6775, 0x01de, 0xcfd5, 0x2d88, 0x5481, 0xc7fa,
    0x8aff, 0x5069, 0x6b3e, 0x86e1, 0x8203, 0x24cd, 0x8897, 0x1a17, 0xbde2, 0x3b88, 0x3200, 0x23db, 0xe9b0, 0x2fa1, 0x5fbe, 0x4380,
    0xb171, 0x646f, 0x28d9, 0x50f7, 0xf5a0, 0xf37e, 0x4b9a, 0x2333, 0x0158, 0x4953, 0xc8ec, 0x6380, 0xb007, 0x0312, 0x210f, 0x1f72,
    0x8da0, 0x7807, 0x8c7e, 0xb7d2, 0xa1f6, 0xe353, 0x660c, 0x69ac, 0x3665, 0x0292, 0xb084, 0x8091, 0x9449, 0x0806, 0x8e5e, 0xb5e4,
    0xb5d6, 0x87e4, 0x960d, 0x6e54, 0xb9ac, 0x31ea, 0xfa2c, 0x809b, 0x9e43, 0xa842, 0xceb4, 0x5de2, 0x3dca, 0x1678, 0x1ef9, 0x1720,
    0x57aa, 0xdfcc, 0x342a, 0x6fcb, 0x3738, 0x4ec4, 0x284a, 0xc364, 0x504d, 0x4f1a, 0xe79f, 0xeeec, 0x04cc, 0x88e0, 0x6d60, 0xbe85,
    0x6ff2, 0x0e01, 0xef63, 0x9a48, 0xe765, 0x1416, 0x5281, 0xa1c0, 0xd565, 0x37cd, 0xbb31, 0x8e61, 0x8adb, 0x744d, 0x0a40, 0xea0e,
    0xa202, 0x24ba, 0xffe0, 0x1970, 0xe998, 0x0789, 0xfeb8, 0x5023, 0x2174, 0x6409, 0x4ebf, 0x5331, 0x007b, 0x7b7b, 0xc31f, 0x2b36,
    0x8c05, 0xcca9, 0x62e9, 0xc865, 0xea09, 0xa505, 0x548c, 0xcaf7, 0x5a8d, 0x2594, 0xc0c5, 0xc2f1, 0xd4d3, 0x9070, 0x7513, 0x4515,
    0x42de, 0xfe24, 0xccbf, 0x74ff, 0xb8f2, 0x7ebf, 0x52fc, 0xdcbd, 0x7646, 0x235d, 0x6f36, 0xcac5, 0x68bf, 0x347d, 0x389c, 0x1509,
    0x5c95, 0x5bb6, 0x0fa4, 0x5bcd, 0x74df, 0x98d2, 0x5fe9, 0x14d7, 0x9340, 0x763e, 0x5b25, 0x9c37, 0xfe20, 0xc8bb, 0x34d7, 0x9236,
    0x1143, 0x52f3, 0xd3b2, 0x8620, 0x43c2, 0xf333, 0x06d7, 0xb1ed, 0xf8f3, 0x7d52, 0x8c0c, 0xc5a0, 0xf2b3, 0x975c, 0x2e0e, 0xe11a,
    0x0d53, 0x8e2c, 0xc796, 0xe693, 0xf3eb, 0xde0f, 0xe6e2, 0x829a, 0xbd54, 0x8d3e, 0xe699, 0xf9e1, 0x7e4b, 0xa608, 0x6a9c, 0x3548,
    0x1ca2, 0x6e6d, 0x8095, 0x904d, 0x482e, 0xa49a, 0xda18, 0xb5d9, 0x88eb, 0x666b, 0x0ecb, 0x25a9, 0xfdf8, 0x237e, 0x4c15, 0xdb8d,
    0x3147, 0x5781, 0xf4e7, 0xa532, 0x63bb, 0x8b3c, 0x82a1, 0x866f, 0x0c8d, 0x41f9, 0xea1e, 0xb212, 0x3411, 0x54f0, 0xb68b, 0xe9a4,
    0x3bb5, 0x0f3d, 0xc254, 0x7176, 0x645c, 0x1bea, 0x5114, 0x0748, 0x3f79, 0x87dd, 0xaf34, 0xcff3, 0x0bae, 0x15eb, 0xbe77, 0x9d00,
    0xd81c, 0x93cb, 0xfdb5, 0x6e33, 0xdecb, 0x2226, 0x0546, 0x1361, 0x52c7, 0xe786, 0xf7f5, 0x843d, 0x7cc9, 0x069c, 0xfaa6, 0x0a11,
    0xbb5f, 0xe00f, 0x094d, 0xd41e, 0x5dbd, 0x6295, 0xb419, 0x5920, 0xbb24, 0x9b74, 0xca52, 0xff28, 0xd1b8, 0xae3c, 0xd6f0, 0x9145,
    0x512d, 0x3e71, 0x9ede, 0x35df, 0x8b35, 0x8ba8, 0x1635, 0x53b4, 0x85fe, 0xae01, 0xebcd, 0x70ca, 0xc9eb, 0x758c, 0xda8a, 0x274b,
    0x3d0c, 0xd0be, 0xb931, 0xac77, 0xbfad, 0x56d1, 0xb5bc, 0xed8e, 0x55b3, 0xe4c3, 0x81ad, 0xb97e, 0xe338, 0x0d67, 0xba18, 0xb643,
    0x216c, 0x7c11, 0xde44, 0xada9, 0x7078, 0x7b59, 0xe13d, 0x2a74, 0xdf4c, 0xb4aa, 0xea93, 0x3f9f, 0x613b, 0x29aa, 0x328f, 0xac54,
    0x9c8e, 0x4799, 0xec44, 0x8e72, 0x99c8, 0x54f8, 0xbe83, 0x69f4, 0x6e3d, 0xd0c5, 0xc24a, 0x6f68, 0x949b, 0xdad4, 0x7915, 0x8f67,
    0x9dd6, 0x0eca, 0x24a8, 0xedf2, 0x29cf, 0x57ea, 0x9f8c, 0x7686, 0xe39d, 0xa8c2, 0x4e34, 0xd8ba, 0x356d, 0x3987, 0x1f19, 0xe6cb,
    0xabb3, 0x0c58, 0x942c, 0x6d63, 0xbd86, 0x5fec, 0x11d2, 0xc362, 0x564b, 0x2f26, 0xd839, 0xb6ee, 0x8cc1, 0x086d, 0xe535, 0x6650,
    0x35f0, 0xa41a, 0x5a98, 0x3081, 0x804c, 0x4994, 0x0f2b, 0xd442, 0x01e1, 0xf0ea, 0xec13, 0xd925, 0xbbf9, 0x46a9, 0xcd7f, 0xa534,
    0x65bd, 0xeb00, 0xbd07, 0xde6d, 0x8480, 0xc174, 0x624b, 0x6ac7, 0x6e13, 0xfeeb, 0x0370, 0x436d, 0x5c9c, 0x52bf, 0x9ffe, 0x04f4,
    0xb0d8, 0xdccd, 0x0636, 0x500c, 0x0e5b, 0xb539, 0x680b, 0x80c9, 0xcc11, 0xda51, 0xfc90, 0x5a1d, 0xb504, 0x5536, 0x6146, 0x54d7,
    0x91ac, 0xb8c4, 0x4889, 0x033d, 0x0e20, 0xce42, 0xab14, 0xabff, 0x4014, 0x16f8, 0x9e79, 0x9278, 0x5f0d, 0xf033, 0x35ca, 0x9e20,
    0xcb21, 0x9d50, 0x884c, 0xc1cc, 0xdaf3, 0x5e32, 0xde07, 0xeeea, 0x02ca, 0xe8dc, 0x52c6, 0xe687, 0xe7ff, 0x8e8c, 0x6736, 0x429d,
    0xbd67, 0xbe0d, 0xe77a, 0x0b09, 0xb24c, 0x6a4f, 0xe69b, 0xfbe3, 0x5e5f, 0xb36a, 0x5d62, 0xbd4a, 0x9320, 0x165e, 0x38df, 0x564a,
    0x2e27, 0xc833, 0xbc5f, 0x973e, 0x4c6c, 0xa2f4, 0xd24c, 0x69d5, 0x4f1c, 0xe199, 0x8ed0, 0x3b6a, 0xd0e2, 0xe56d, 0x3e08, 0xe7a7,
    0xd6d4, 0xb561, 0x3053, 0x529e, 0xbedf, 0x35a8, 0xfc42, 0x88cf, 0x424f, 0x6fb5, 0x4946, 0xddf9, 0x2309, 0x3b62, 0xd8ea, 0x653d,
    0x6b80, 0x385f, 0xd6ca, 0xab7f, 0xc094, 0x93a0, 0x96de, 0xbd87, 0x5eed, 0x01d8, 0xc9d3, 0x4db4, 0x6b27, 0x9ff8, 0x02f2, 0xd0e4,
    0xe36b, 0x5e34, 0xd801, 0x8ed6, 0x3d6c, 0xb0de, 0xdacb, 0x660a, 0x6faa, 0x5659, 0x3d34, 0xe886, 0x089c, 0x14c4, 0x8053, 0x568b,
    0xefe6, 0x1fcd, 0x321f, 0x3cc4, 0x097d, 0xe42e, 0x6c40, 0x8fae, 0x541f, 0x5964, 0xff60, 0x99f0, 0x6cc0, 0x0f2e, 0xd147, 0x51c3,
    0xd09f, 0x9810, 0x9d2b, 0xf337, 0x02d3, 0xf1c5, 0xd237, 0x12ae, 0x8c03, 0xcaaf, 0x02d5, 0xf7c3, 0xb20b, 0x2d08, 0xd401, 0x42a2,
    0x8258, 0x7f96, 0x6ade, 0x770a, 0x7e1a, 0xf759, 0x2891, 0x18bf, 0x375c, 0x2aa0, 0x0b98, 0x23dd, 0xefb6, 0x4f9d, 0x6018, 0x1b82,
    0x397c, 0xe4e2, 0xa08c, 0x8822, 0xafa2, 0x5965, 0xfe61, 0x89fa, 0x6671, 0x14d1, 0x9546, 0x1602, 0x6483, 0xc435, 0x762d, 0x4836,
    0xbc82, 0x4ae3, 0x4b41, 0xf8e8, 0x6649, 0x2ce9, 0x24eb, 0xaeb1, 0x5b7d, 0xc46f, 0x2c77, 0xba75, 0xdb2e, 0x92e4, 0xc391, 0xa5b8,
    0xe931, 0xae20, 0xcaec, 0x4196, 0x8571, 0x218e, 0x9ef3, 0x18f2, 0x7a11, 0xb87e, 0xf233, 0x17dc, 0xab56, 0xe9bd, 0x22ac, 0x8fcc,
    0x367d, 0x1a8a, 0x207f, 0x7e09, 0xe44a, 0x0824, 0xac7c, 0xb4a6, 0xe69f, 0xffe7, 0x1e77, 0x99ae, 0x329e, 0xbd45, 0x9c2f, 0xe638,
    0x5840, 0xca4f, 0xe235, 0x1161, 0x70d1, 0xd2f0, 0xd569, 0x3bc1, 0x7b49, 0xf12d, 0x3adf, 0x745c, 0x1b51, 0xeaaf, 0x03a3, 0x90be,
    0xbbdd, 0x628d, 0xac01, 0xc9db, 0x45bc, 0xeb77, 0xca70, 0xdd0a, 0xd0fa, 0xfd75, 0xaef3, 0x193f, 0xa6d7, 0xb543, 0x1271, 0x53dc,
    0xed96, 0x4dab, 0x7438, 0x7f35, 0xc97d, 0xe31a, 0x2f45, 0xbb5a, 0xe50a, 0x596f, 0xf46b, 0x29be, 0x269b, 0xfcd7, 0x1d5a, 0x879e,
    0xec77, 0xbd41, 0x982b, 0xa610, 0x7284, 0xa5b3, 0xe23a, 0x1e6e, 0x80b7, 0xb26f, 0x496c, 0xf7d3, 0xa21b, 0x3da3, 0x7f11, 0xed59,
    0x8264, 0x43aa, 0x9b5b, 0xe57d, 0x2e18, 0xf70c, 0x7dc4, 0x1a9a, 0x306f, 0x6ea2, 0x4f5a, 0xa7df, 0xac40, 0x889a, 0x171a, 0x6d90,
    0x4e75, 0x99fb, 0x67cb, 0xbf60, 0x9b1c, 0xa23a, 0x1c82, 0x4e4d, 0xa1c3, 0xd666, 0x07d3, 0xa4e2, 0xa260, 0x46d8, 0xbc0e, 0xc66f,
    0x0e61, 0x8f03, 0xf9b2, 0x2d18, 0xc411, 0x5209, 0x2948, 0xd06d, 0x6ae2, 0x4b36, 0x8f9f, 0x652e, 0x7893, 0x18ea, 0x6209, 0x2885,
    0x0cab, 0x67df, 0xab74, 0xcb9f, 0x23ee, 0xdc85, 0x4e7e, 0x92f0, 0xd785, 0xf53b, 0x68e5, 0x6e27, 0xcadf, 0x72a5, 0x8492, 0xd366,
    0x52f4, 0xd4b5, 0xf616, 0x76d5, 0xb0ce, 0xcadb, 0x76a1, 0xc4ba, 0xf9a2, 0x3d08, 0xd4ba, 0xf919, 0x86b3, 0xd051, 0x56de, 0xbab3,
    0x1de8, 0x352c, 0x78c6, 0x4dbf, 0x602c, 0x2fb6, 0x48a9, 0x231d, 0x2f76, 0x8869, 0xe4e9, 0xab87, 0x386c, 0xe5f9, 0xaa9c, 0x327c,
    0x5fa7, 0x5a99, 0x3180, 0x9046, 0x4325, 0x14d4, 0x9043, 0x4620, 0x44f6, 0xb036, 0x3223, 0x00f8, 0xf8f8, 0x7659, 0x3c42, 0x8ffb,
    0x014a, 0x5b41, 0xf853, 0xddf2, 0x2802, 0x8b2c, 0x92b1, 0x96c4, 0xa79d, 0xee02, 0xea22, 0x8e2e, 0xc594, 0xc687, 0xe689, 0xe9f1,
    0x6ee0, 0x0d18, 0xc567, 0x3574, 0x209e, 0x9fe8, 0x12e2, 0xc04f, 0x487b, 0xf1cf, 0xd83d, 0xb2ea, 0xcce9, 0x22a9, 0x8ac9, 0x665f,
    0x3aff, 0x547c, 0x3a07, 0xac84, 0x4c5e, 0x90c6, 0xc3a5, 0x918c, 0x98e4, 0x69df, 0x4516, 0x41dd, 0xce3a, 0xd36c, 0x58fe, 0x74f1,
    0xb6fc, 0x9ed3, 0x38d2, 0x5b47, 0xfe55, 0xbdce, 0x17a4, 0xd32e, 0x1abc, 0x1649, 0x2fc8, 0x36d7, 0xb020, 0x2435, 0x706f, 0x6c4e,
    0x81a0, 0xb473, 0x334a, 0x789a, 0x11e3, 0xf253, 0x77bc, 0xc8ac, 0x23c0, 0xf2ab, 0x8f44, 0xbef5, 0x1f82, 0x7d50, 0x8e0e, 0xe5b4,
    0xe7d1, 0xa0a2, 0xa60c, 0x6e98, 0x7560, 0x3666, 0x0191, 0x809a, 0x9f42, 0xb848, 0xc405, 0x461d, 0x79cb, 0x51b9, 0xaae5, 0x4b05,
    0xbcac, 0x64cd, 0x8a7b, 0xd4ed, 0xae4e, 0xa482, 0xc200, 0x2522, 0x7673, 0x1668, 0x0ee9, 0x078b, 0xfcba, 0x7037, 0x3416, 0x53f7,
    0xc6bd, 0xdcb3, 0x7848, 0xc331, 0x0518, 0x4d3f, 0xe0ac, 0xaaee, 0x400e, 0x0ce2, 0x2e96, 0x7982, 0x18f0, 0x7813, 0x986a, 0xe751,
    0x2022, 0x2354, 0x663f, 0x5a9f, 0x3786, 0xf07a, 0x7c83, 0x4cd6, 0x184e, 0xc6ad, 0xcca3, 0x68e3, 0x6821, 0xaae3, 0x4d03, 0xdc90,
    0x5b6b, 0xd279, 0x5ce0, 0x2ec3, 0x2cd7, 0x1ad5, 0x7f20, 0xdc68, 0xa393, 0xa420, 0x60a2, 0xa138, 0x2d9d, 0x4194, 0x8773, 0x019a,
    0x8b91, 0x2f0c, 0xf213, 0x37fc, 0x8a00, 0xaf96, 0x6d51, 0x8fb4, 0x4e05, 0xe98b, 0x149a, 0xde0d, 0xe4e0, 0xa28e, 0xa836, 0xbac0,
    0x6e9b, 0x7663, 0x0678, 0x1e42, 0xac9b, 0x5341, 0x700b, 0x082a, 0xa272, 0x54ca, 0x8cb1, 0x781d, 0x9664, 0x073d, 0x4a0c, 0xa4ae,
    0xee2c, 0xc40c, 0x4f14, 0xe991, 0x0e80, 0x6ee2, 0x0f1a, 0xe573, 0x2016, 0x1760, 0x17ea, 0x9d60, 0xb87c, 0xf031, 0x37c8, 0xbe34,
    0xde43, 0xaaae, 0x004e, 0x4e4e, 0xa2c0, 0xe678, 0x1800, 0x88e3, 0x6e63, 0x8e9b, 0x7021, 0x2200, 0x2360, 0x520b, 0x2b4a, 0xf079,
    0x7f80, 0x7cc8, 0x079d, 0xeaac, 0x00a0, 0xa0a0, 0xa40e, 0x4e8c, 0x6002, 0x0198, 0x8993, 0x0f18, 0xe771, 0x0002, 0x0202, 0x2014,
    0x1562, 0x37fe, 0x8802, 0x8f82, 0x7833, 0xb84a, 0xc607, 0x6609, 0x6ca9, 0x6647, 0x22e7, 0xc487, 0xc49f, 0xdc87, 0x4c7c, 0xb2e4,
    0xc2e7, 0xc2c5, 0xe0e7, 0xe1a5, 0xb2ec, 0xcaef, 0x4295, 0xb56f, 0x3e5d, 0xb2f2, 0xd4f1, 0xb252, 0x7451, 0x165c, 0x3add, 0x765e,
    0x3b45, 0xffcd, 0x345d, 0x18bc, 0x345f, 0x1abe, 0x144b, 0x0fdc, 0x23b5, 0x87de, 0xac37, 0xffed, 0x147d, 0x39ea, 0x7274, 0x5543,
    0x1433, 0x77a4, 0xd0b4, 0xb33b, 0x0c33, 0xff47, 0xbed7, 0x3da0, 0x7c12, 0xdd47, 0x9db7, 0x6fab, 0x5758, 0x2d3e, 0xe237, 0x1363,
    0x50c5, 0xc792, 0xe297, 0xb3c3, 0xf4cb, 0x891e, 0x8295, 0xb25b, 0x7d58, 0x8606, 0x65e4, 0xb259, 0x7f5a, 0xa612, 0x7086, 0x85a7,
    0xf758, 0x2990, 0x08b5, 0x3ded, 0x315f, 0x4f99, 0x641c, 0x5baa, 0x13b8, 0x8b1e, 0xa083, 0x872d, 0x5fc4, 0x39fa, 0x6264, 0x45e8,
    0xbf23, 0xd85f, 0xd088, 0x8f07, 0xfdb6, 0x6d30, 0xeed5, 0x3df5, 0x2947, 0xdf62, 0x9a84, 0x2ba9, 0x139a, 0xa93c, 0xa1c1, 0xd464,
    0x27c7, 0xb180, 0x959e, 0xceda, 0x338c, 0xbe5c, 0xb62b, 0x4904, 0x9fbb, 0x41b1, 0xa256, 0x70ee, 0xedcf, 0x14f2, 0xb665, 0x074a,
    0x3d7b, 0xa7c9, 0xba56, 0xf80d, 0x83ac, 0x9a69, 0xc644, 0x254a, 0x1e1b, 0xf5c2, 0x911c, 0x0874, 0xfc2c, 0xe6a1, 0xc1d9, 0xcfe6,
    0x1ebb, 0x5562, 0x3512, 0x46f8, 0x9c2e, 0xe739, 0x484a, 0xc0fe, 0xf9ca, 0x5560, 0x3710, 0x66ec, 0x894c, 0xd0c7, 0xc048, 0x4f7c,
    0x81f9, 0xed2a, 0xf117, 0x00e5, 0xe5e5, 0xb680, 0xe2af, 0x8bfb, 0x4566, 0x31ad, 0xbd6b, 0xb201, 0x2702, 0x7445, 0x0248, 0x6a5e,
    0xf78a, 0xfb42, 0xfffe, 0x076e, 0x195f, 0xc6b7, 0xd6b9, 0xd80c, 0x83db, 0xed1e, 0xc523, 0x7130, 0x221a, 0x397a, 0xe2e4, 0xc0b0,
    0xb784, 0xf7a0, 0xd168, 0x7eec, 0x01af, 0xbea4, 0x4ed3, 0x3f5d, 0xa3f9, 0xce4a, 0xa31c, 0x2baf, 0x159c, 0xc900, 0x9e67, 0x8c66,
    0xafca, 0x310d, 0x1dcb, 0x160f, 0x698e, 0x1447, 0x03d0, 0xe3cd, 0xf892, 0x1c33, 0xfffc, 0x056c, 0x394b, 0xd3d5, 0xe147, 0x500e,
    0x0c59, 0x952d, 0x7d69, 0xb737, 0x4413, 0x55d3, 0x84a3, 0xe257, 0x7303, 0x333f, 0x0def, 0x3290, 0xb34b, 0x7c43, 0x8c16, 0xdfba,
    0x425c, 0x7ca6, 0x69f3, 0x693a, 0xa0f3, 0xf75d, 0x2c95, 0x5897, 0x1d98, 0x455c, 0x0b97, 0x2cd2, 0x1fd0, 0x2f02, 0xfc1d, 0xd790,
    0xe02e, 0x286c, 0xe542, 0x1127, 0x3697, 0xf060, 0x6699, 0xfc39, 0xf3b4, 0x8150, 0x4483, 0xc543, 0x1150, 0x41e0, 0xf307, 0x32e3,
    0xc038, 0x3f0c, 0xf2a8, 0x8c47, 0x8eeb, 0x0051, 0x5151, 0x420d, 0x2df7, 0x2bfe, 0x44cd, 0x8b0d, 0xb390, 0xa798, 0xeb07, 0xba00,
    0xae5b, 0xb197, 0x8289, 0xae47, 0xad8b, 0x525a, 0x7a1b, 0xb274, 0x5277, 0x5736, 0x4350, 0x61a1, 0xb330, 0x0738, 0x4f09, 0xf48c,
    0xce59, 0xb00f, 0x0b1a, 0xa15f, 0x4afa, 0x5258, 0x7819, 0x9260, 0x4715, 0x60c8, 0xcb52, 0xee23, 0xcb03, 0xbf72, 0x890e, 0x9285,
    0xa2f0, 0xd648, 0x29fd, 0x65d8, 0x8e65, 0x8edf, 0x3465, 0x2084, 0x85f2, 0xa20d, 0x2bb5, 0x0f86, 0x79ef, 0x759d, 0xcb9b, 0x27ea,
    0x9cad, 0x64ba, 0xfd0c, 0xd78a, 0xfa34, 0x9883, 0x0eb8, 0x56da, 0xbeb7, 0x5dc0, 0x1fe8, 0x173a, 0x4db0, 0x6f23, 0xdfd0, 0x2836,
    0xbf18, 0xe364, 0x513b, 0x2867, 0xee49, 0xa169, 0x7ccc, 0x0399, 0xaa84, 0x2a64, 0xcf5c, 0xa401, 0x4183, 0x9064, 0x6107, 0x1596,
    0xc30a, 0x3e23, 0xcc8c, 0x47cc, 0xb911, 0x8c57, 0x9efb, 0x10fa, 0xfa41, 0xedf6, 0x2dcb, 0x17c2, 0xb548, 0x197a, 0xe392, 0xa7cd,
    0xbe52, 0xb825, 0xa968, 0xf595, 0xc64b, 0x2a45, 0xee7d, 0x955d, 0x0d19, 0xc466, 0x257e, 0x2a2f, 0x8417, 0x56e3, 0x878e, 0xfc67,
    0xadea, 0x333b, 0x09eb, 0x72b8, 0x998f, 0x13bf, 0x8c19, 0xd0b5, 0xb23a, 0x1c39, 0xf5f6, 0xa528, 0x79a1, 0x3bd3, 0x695b, 0xc192,
    0x84ad, 0xec59, 0x936f, 0x5911, 0x8a15, 0xba83, 0x2dd8, 0x04d1, 0x95fd, 0xadb9, 0x6068, 0x6bf2, 0x4a2d, 0x858f, 0xdf70, 0x8896,
    0x1b16, 0xade8, 0x3139, 0x29ff, 0x67da, 0xae71, 0x9bbd, 0x039b, 0xa886, 0x0a70, 0xda3e, 0x93ff, 0xc981, 0x1fe6, 0x1934, 0xaddc,
    0x050d, 0x582a, 0xa025, 0x218b, 0x9bf6, 0x48d0, 0x5a64, 0xcc7d, 0xb63d, 0x5f12, 0xef2c, 0xd507, 0x55af, 0xf8df, 0x517e, 0x6d22,
    0xfcc7, 0x0d4a, 0x9735, 0x4767, 0x12ba, 0x9817, 0x9a2c, 0x8301, 0x37c4, 0xb238, 0x1e3b, 0xd5e2, 0xb04a, 0x4e5f, 0xb3d1, 0xe6d9,
    0xb9a1, 0x3ce7, 0x2a5e, 0xf566, 0x35b8, 0xec52, 0x9864, 0xe95f, 0xc04e, 0x497a, 0xe1c5, 0xd28c, 0xa915, 0x88e8, 0x6568, 0x3ed5,
    0x3a7a, 0xd1f9, 0xef7d, 0x8456, 0x17a2, 0xd528, 0x7a80, 0x29ef, 0x77ca, 0xbeda, 0x30ad, 0xac60, 0xa8ba, 0x364c, 0x2bbb, 0x0188,
    0x9983, 0x1fb3, 0x4c61, 0xaff9, 0x023e, 0x1c28, 0xe4e7, 0xa589, 0xd800, 0x8fd7, 0x2d66, 0xba6f, 0xc134, 0x220b, 0x286b, 0xe245,
    0x6111, 0x0380, 0xb39d, 0xaa95, 0x3b75, 0xcffd, 0x05a0, 0xf587, 0xd459, 0x1afa, 0x500f, 0x0d58, 0x8527, 0x77d8, 0xacc8, 0x0012,
    0x1212, 0x30bf, 0xbe72, 0x9805, 0x883e, 0xb3be, 0x89b6, 0x2a3d, 0x9605, 0x665c, 0x39fc, 0x6462, 0x25d4, 0x8085, 0x805d, 0x5885,
    0x0f8a, 0x75e3, 0xb5e5, 0xb4d7, 0x97ee, 0x9cbc, 0x75ab, 0xfdad, 0x762b, 0x4e30, 0xdcbe, 0x7545, 0x1343, 0x70e5, 0xe6c4, 0xa4bc,
    0xfc3e, 0xf4b3, 0xf166, 0x7194, 0x86be, 0xdd5c, 0x86ac, 0xcf4e, 0xb613, 0x713c, 0x2e16, 0xf902, 0x9da8, 0x70b4, 0xb795, 0xe6b1,
    0xd1c9, 0xdf4d, 0xb5ab, 0xfa99, 0x352e, 0x7ac4, 0x6dab, 0x754e, 0x1848, 0xc0ab, 0xac9f, 0x5745, 0x3023, 0x22ee, 0xcd8e, 0x54c5,
    0x83be, 0x887b, 0xf6fb, 0x9b38, 0x861e, 0x7dfc, 0x22a2, 0x81c2, 0xd611, 0x70a4, 0xa785, 0xf61a, 0x7ad9, 0x70b6, 0xb597, 0xc6a5,
    0xc4ab, 0xe8b3, 0x3da9, 0x751b, 0x4d1d, 0xc28e, 0xabac, 0x1347, 0x74e1, 0xa6ec, 0x8e78, 0x93c2, 0xf4bc, 0xfe69, 0x81f2, 0xe621,
    0x4159, 0x4abe, 0x161c, 0x7a9d, 0x34f2, 0xb713, 0x6037, 0x34ad, 0xe84c, 0xc256, 0x7374, 0x4448, 0x0e88, 0x66ea, 0x8f4a, 0xb0fb,
    0xffee, 0x177e, 0x09f4, 0x6da7, 0x7942, 0xd830, 0xbfe7, 0x1c9b, 0x5754, 0x2132, 0x224f, 0x6c2f, 0xe0c1, 0xc783, 0xf386, 0xb362,
    0x556a, 0x3d1a, 0xc6a8, 0xc9a6, 0x38c1, 0x4854, 0xdee0, 0x090d, 0x945e, 0x1f11, 0xeec3, 0x2be3, 0x59d0, 0x4bd4, 0x6d7d, 0xa398,
    0xaf2b, 0xd0ec, 0xeb63, 0xde64, 0x8d89, 0x512e, 0x3d72, 0xaec0, 0x2a0c, 0xa734, 0x47ab, 0xde76, 0x9f9b, 0x6191, 0x8300, 0x36c5,
    0xa232, 0x148a, 0xce1d, 0xf44b, 0x099e, 0x07cd, 0xbafc, 0x52a7, 0x87e6, 0x940f, 0x4e40, 0xacce, 0x0614, 0x722e, 0x0f19, 0xe670,
    0x1008, 0x08b3, 0x3beb, 0x5163, 0x703f, 0x3c1e, 0xd3a7, 0x9335, 0x034b, 0x7856, 0xdd2f, 0xf5df, 0x8c01, 0xc8ad, 0x22c1, 0xe2a1,
    0x85f5, 0xa50a, 0x5b83, 0x3a91, 0x3a12, 0xb991, 0x0cd7, 0x1ba3, 0x185d, 0xd5be, 0xec16, 0xdc20, 0xebdb, 0x66dc, 0xb97c, 0xe13a,
    0x2d73, 0xaf7a, 0x81bd, 0xa96e, 0xf393, 0xa677, 0x15e3, 0xb67f, 0x1d50, 0x8d94, 0x4c33, 0xfdab, 0x702d, 0x2e0c, 0xe318, 0x2d47,
    0x9b4e, 0xf068, 0x6e91, 0x7c69, 0xa63c, 0x5ea8, 0x449d, 0xdb5d, 0xe197, 0x80de, 0xdb06, 0xbacc, 0x6297, 0xb61b, 0x7934, 0xae46,
    0xac8a, 0x4250, 0x70aa, 0xa98b, 0x1676, 0x10f7, 0xf74c, 0x3d84, 0x5836, 0xbc39, 0xf158, 0x4faa, 0x572f, 0x5a49, 0xe150, 0x4719,
    0x6cc4, 0x0b2a, 0x916f, 0x7b07, 0xbf63, 0x981f, 0x9224, 0x0351, 0x624c, 0x6dc0, 0x1e25, 0xcbfc, 0x408d, 0x8f61, 0x9bd0, 0x6ef6,
    0x1b0e, 0xb5f0, 0xa1c2, 0xd767, 0x17d9, 0xae53, 0xb99f, 0x02d9, 0xfbcf, 0x7273, 0x5244, 0x6405, 0x42b3, 0x9349, 0x7f37, 0xcb7f,
    0xc30e, 0x3a27, 0x8ca4, 0x6d08, 0xd6ed, 0x8c58, 0x91f4, 0xe09c, 0x9ade, 0x71f3, 0xe1d9, 0xce90, 0x79c6, 0x5cb4, 0x7a97, 0x3ef8,
    0x1757, 0x20dd, 0xdcab, 0x6050, 0x53ca, 0xfb80, 0x3d3c, 0xe08e, 0x88cc, 0x414c, 0x5fab, 0x5695, 0xf1f8, 0xef0a, 0xf321, 0x14c5,
    0x8152, 0x4681, 0xe557, 0x0432, 0x761e, 0x7b05, 0xbd61, 0xb80b, 0x8746, 0x34af, 0xea4e, 0xe242, 0x6616, 0x73b6, 0x868a, 0xe968,
    0xf779, 0x08b1, 0x39e9, 0x7177, 0x655d, 0x0be0, 0x5ba5, 0x1cb7, 0x7b78, 0xc01c, 0x1b28, 0x93d6, 0xe0a8, 0xaeea, 0x0026, 0x2626,
    0x416a, 0x798d, 0x17ff, 0x8875, 0xf8f5, 0x7b54, 0xec30, 0xfa06, 0xaab1, 0x1f51, 0xae83, 0x694f, 0xd586, 0xd42e, 0x6d8d, 0x5368,
    0x5922, 0xb926, 0xbb60, 0xdf30, 0xc8d6, 0x59ba, 0x21be, 0xaec3, 0x290f, 0x972a, 0x5878, 0xf277, 0x5398, 0xa9d2, 0x4f2f, 0xd2aa,
    0x8f33, 0xc982, 0x1ce5, 0x292a, 0xb20f, 0x290c, 0x9429, 0x6866, 0xeda4, 0x7f99, 0x65d1, 0x876c, 0x1e85, 0x6b5c, 0xe483, 0xc1ed,
    0xfbd2, 0x6f6e, 0x929d, 0xbae8, 0x46b3, 0xd765, 0x15db, 0x8e47, 0xacfd, 0x3527, 0x73cd, 0xfdf1, 0x2a77, 0xdc4f, 0x84b4, 0xf540,
    0x139e, 0xad38, 0xe1e9, 0xfea0, 0x483b, 0xb18f, 0x9a91, 0x3ebc, 0x5313, 0x2259, 0x7a39, 0x9056, 0x5335, 0x047f, 0x3b53, 0xe9db,
    0x44ca, 0x8c0a, 0xc3a6, 0x928f, 0xa8fa, 0x760c, 0x6917, 0x8dde, 0x0679, 0x1f43, 0xbc91, 0x59f0, 0x6bf4, 0x4c2b, 0xe5b3, 0xe0d6,
    0xd094, 0x931b, 0x2d65, 0xb96c, 0xf12a, 0x3dd8, 0x046a, 0x2e46, 0xa952, 0xcfaf, 0x57f2, 0x8794, 0xe67d, 0x1d05, 0xd8c1, 0x4e16,
    0xfa98, 0x342f, 0x6ace, 0x671a, 0x6eb1, 0x5c49, 0x876a, 0x1883, 0x0b60, 0xdb25, 0x99ef, 0x73df, 0xefe3, 0x1ac8, 0x623d, 0x1cb1,
    0x7d7e, 0xa020, 0x248e, 0xcbd4, 0x68a5, 0x2e67, 0x8873, 0xfef3, 0x1b68, 0xd396, 0xa204, 0x22bc, 0x9fdc, 0x26d6, 0xb19a, 0x8f84,
    0x7e35, 0xd876, 0xf9a1, 0x3e0b, 0xe4a4, 0xe6ca, 0xaab2, 0x1c52, 0x9e9d, 0x769c, 0xf987, 0x182d, 0xa5ce, 0x9f47, 0xbd4d, 0x9427,
    0x6668, 0x0dc8, 0x15b7, 0xe22b, 0x0f7f, 0x8016, 0x13ce, 0xfd68, 0xb3ee, 0xd9e6, 0x783a, 0xb143, 0x565d, 0x3930, 0xa8ae, 0x2258,
    0x7b38, 0x805c, 0x5984, 0x1f80, 0x7f52, 0xae1a, 0xf0d6, 0xd02f, 0x28a0, 0x298e, 0x16ab, 0xcd2a, 0xf061, 0x6798, 0xec33, 0xf905,
    0x9aaf, 0x0082, 0x8282, 0xa54c, 0x1dc5, 0x1801, 0x89e2, 0x7e69, 0x842a, 0x6bde, 0x6601, 0x64a1, 0xe617, 0x776f, 0x1b7f, 0xc481,
    0xc299, 0xbcbb, 0x73da, 0xeae6, 0x4aea, 0x4248, 0x68b2, 0x3970, 0xe8ee, 0x60f4, 0xf76e, 0x1fa6, 0x5974, 0xef70, 0x895b, 0xc7d0,
    0xa0d5, 0xd17b, 0x6dff, 0x211a, 0x0a67, 0xcd29, 0xf362, 0x5786, 0xf3e0, 0xd504, 0x56ac, 0xc8c1, 0x4ead, 0x4123, 0x30c4, 0xc509,
    0x5b1a, 0xa308, 0x3fbb, 0x451f, 0x48d4, 0x5e60, 0x8c55, 0x9cf9, 0x30ee, 0xef23, 0xda08, 0xa5c9, 0x9840, 0xcd7b, 0xa130, 0x2595,
    0xc1c4, 0xd2fb, 0xde62, 0x8b8f, 0x3112, 0x02d4, 0xf6c2, 0xa201, 0x27b9, 0xcffe, 0x06a3, 0xc599, 0xcb8a, 0x36fb, 0x9c0c, 0xc51b,
    0x4908, 0x93b7, 0x81c9, 0xdd1a, 0xc0ea, 0xedde, 0x05e3, 0xb6c4, 0xa6eb, 0x897f, 0xe3f4, 0xc1ab, 0xbd94, 0x4dfe, 0x216d, 0x7d10,
    0xce4e, 0xa718, 0x6b87, 0x3f58, 0xa6fc, 0x9e68, 0x8369, 0x5fac, 0x5192, 0x81ce, 0xda1d, 0xb0dc, 0xd8c9, 0x461e, 0x7ac8, 0x61a7,
    0xb536, 0x6704, 0x70af, 0xac8e, 0x4654, 0x3082, 0x834f, 0x798a, 0x10f8, 0xf843, 0xcde2, 0x38a9, 0x203c, 0x3d4a, 0x96f8, 0x9ba1,
    0x1f87, 0x7855, 0xde2c, 0xc5c1, 0x93d2, 0xe4ac, 0xeec2, 0x2ae2, 0x49da, 0x4165, 0x7682, 0xe799, 0xe8ea, 0x64f0, 0xb746, 0x3562,
    0x3688, 0xef7f, 0x8654, 0x37b6, 0xc04a, 0x4d7e, 0xa1ed, 0xf848, 0xc6e9, 0x88e7, 0x6a67, 0xceb3, 0x5ae5, 0x4dfc, 0x236f, 0x5d04,
    0xdb2c, 0x90e6, 0xe385, 0xb0da, 0xdecf, 0x2622, 0x456e, 0x39a5, 0x3d3b, 0xe789, 0xf8fa, 0x745b, 0x1c56, 0x9a99, 0x36b4, 0xd343,
    0x77d1, 0xa5c1, 0x9048, 0x4d2b, 0xf4b8, 0xfa6d, 0xc1da, 0xcce5, 0x2ea5, 0x4ab1, 0x1913, 0x8afb, 0x546d, 0x2b16, 0xac25, 0xedff,
    0x24c2, 0x8798, 0xea71, 0xdd7d, 0xa78d, 0xfe12, 0xfa89, 0x253e, 0x6a6f, 0xc6bb, 0xdab5, 0x1874, 0xfc97, 0x5d1a, 0xc532, 0x6021,
    0x22bb, 0x98db, 0x56e0, 0x848d, 0xcc79, 0xb239, 0x1f3a, 0xc5e8, 0xbafb, 0x55a0, 0xf7d0, 0xa118, 0x0dbd, 0x60c2, 0xc158, 0x4e67,
    0x8be9, 0x5774, 0x0112, 0x0319, 0x2a04, 0xaf3c, 0xc7fb, 0x8bfe, 0x4063, 0x618f, 0x9d1e, 0xc602, 0x630c, 0x3c8b, 0x4632, 0x56e4,
    0x8089, 0x8c51, 0x98fd, 0x70c6, 0xc5e7, 0xb5f4, 0xa5c6, 0x974f, 0x3d1d, 0xc1af, 0xb990, 0x0dd6, 0x0ba9, 0x12ec, 0xce41, 0xa817,
    0x9be1, 0x5fc7, 0x3af9, 0x527a, 0x5a3b, 0x9322, 0x145c, 0x18cb, 0x4328, 0x19d9, 0x4031, 0x33dd, 0xef0d, 0xf426, 0x64f3, 0xb445,
    0x057c, 0x295b, 0xc37e, 0x4a57, 0xfff5, 0x0c65, 0xa911, 0x8cec, 0x2540, 0x1411, 0x5586, 0xd1f6, 0xe072, 0x7430, 0x773d, 0x492d,
    0xb692, 0xf0bd, 0xbb44, 0xfb14, 0xa9a8, 0x3555, 0x01bf, 0xaeb4, 0x5e78, 0x944d, 0x0c02, 0xce76, 0x9f20, 0xda2a, 0x87eb, 0x9902,
    0x9e32, 0xd933, 0xadef, 0x363e, 0x59c9, 0x52cd, 0xed8c, 0x57b1, 0xc4d7, 0x94cf, 0x8e80, 0x6b3a, 0x82e5, 0xc22b, 0x0e09, 0xe76b,
    0x1a18, 0xb2ed, 0xcbee, 0x529f, 0xbfde, 0x25a2, 0xf6f3, 0x9330, 0x064e, 0x2874, 0xfd5a, 0x81dc, 0xc80f, 0x8063, 0x66bb, 0xde1b,
    0xf2f6, 0xd219, 0x3c80, 0x4d39, 0xe6aa, 0xcad2, 0x7fa8, 0x54e0, 0xa69b, 0xf90f, 0x90a5, 0xa0c6, 0xc268, 0x4d4a, 0x95d9, 0x899d,
    0x0116, 0x071d, 0x6a2c, 0x85f8, 0xa807, 0x8bf1, 0x4f6c, 0x91e9, 0xfd81, 0x5a07, 0xaf1e, 0xe5d9, 0x8abc, 0x132a, 0x198c, 0x1564,
    0x31f8, 0xe83e, 0xb024, 0x2031, 0x3047, 0x468a, 0xee5c, 0xb47c, 0x3c45, 0x88fc, 0x717c, 0x6e56, 0xbbae, 0x11fe, 0xef4e, 0xb765,
    0x1641, 0x27c0, 0xb687, 0xe5a8, 0xfbcd, 0x7071, 0x7250, 0x7167, 0x754d, 0x1b4b, 0xf0b5, 0xb34c, 0x7b44, 0xfc20, 0xeaad, 0x01a1,
    0xb0aa, 0xaebf, 0x5573, 0x2403, 0x4659, 0x3d8f, 0x533d, 0x0c77, 0xbb03, 0xbc53, 0x9b32, 0x8c14, 0xddb8, 0x6248, 0x69c4, 0x5e0d,
    0xe138, 0x2f71, 0x8f6e, 0x94df, 0x9e90, 0x7b91, 0x29f5, 0x6dd0, 0x0e35, 0xdb57, 0xeb9d, 0x209a, 0x9bec, 0x52ca, 0xea8b, 0x2787,
    0xf1c0, 0xd732, 0x428c, 0xac76, 0xbeac, 0x46db, 0xbf0d, 0xf671, 0x11b2, 0xa302, 0x35b1, 0xe55b, 0x083e, 0xb666, 0x0449, 0x0d65,
    0xb81a, 0x9657, 0x340e, 0x4bef, 0x5646, 0x222b, 0x084b, 0xc313, 0x273a, 0x4c7d, 0xb3e5, 0xd2ed, 0xc874, 0xfb18, 0xa5a4, 0xf52d,
    0x7ef3, 0x1eb0, 0x5e69, 0x855c, 0x0ca3, 0x6fd7, 0x2b24, 0x9e17, 0xfc16, 0xdc9b, 0x5060, 0x6237, 0x16bb, 0xdd3a, 0xe0ca, 0xcc88,
    0x43c8, 0xf939, 0xa693, 0xf107, 0x10f5, 0xf54e, 0x1d90, 0x4d54, 0x8bc7, 0x795a, 0xc028, 0x2f1c, 0xe203, 0x2757, 0x2110, 0x006d,
    0x6d6d, 0xb388, 0xbf80, 0x7bfc, 0x4498, 0xde58, 0xb1b5, 0xa0ab, 0xaf05, 0xfec2, 0x2a59, 0xf261, 0x458e, 0xd945, 0xdb99, 0x2553,
    0x0702, 0x7533, 0x6535, 0x6388, 0xb80f, 0x8342, 0x7487, 0xc08a, 0x8dbe, 0x6619, 0x7cb9, 0x76ec, 0x89f7, 0x6b7c, 0xc4a3, 0xe0bb,
    0xbdf9, 0x2093, 0x92e5, 0xc290, 0xb5b2, 0xe380, 0xb5df, 0x8eed, 0x0657, 0x316d, 0x7dab, 0x75f5, 0xa3f3, 0xc440, 0x0358, 0x6b45,
    0xfd9a, 0x411c, 0x0ffb, 0x0492, 0xd6be, 0xdf0b, 0xf3ed, 0xd809, 0x86de, 0xbd3c, 0xe556, 0x0533, 0x6614, 0x71b4, 0xa69e, 0xfc0a,
    0xc087, 0x80b3, 0xb66b, 0x0944, 0xdd17, 0xcde7, 0x3dac, 0x701e, 0x1d3f, 0xe2fb, 0xdfaf, 0x5749, 0x3c2f, 0xe296, 0xb2c2, 0xe4c1,
    0x83af, 0x996a, 0xf65a, 0x3a99, 0x321a, 0x39c1, 0x595f, 0xc45b, 0x1843, 0xcba0, 0x1cd1, 0x1d1e, 0xc3da, 0xeef3, 0x1bd3, 0x682d,
    0xa6ef, 0x8d7b, 0xa3dc, 0xeb6f, 0xd268, 0x4df1, 0x2e62, 0x8d76, 0xaed1, 0x3b1d, 0xa795, 0xe60a, 0x6a72, 0xdba6, 0x1a6c, 0xc699,
    0xf897, 0x1936, 0xafde, 0x2519, 0x4d48, 0x97db, 0xa989, 0x1474, 0x30e3, 0xe22e, 0x0a7a, 0xd034, 0x33bb, 0x896b, 0xf7e0, 0x9128,
    0x3c40, 0x8df9, 0x215e, 0x4e23, 0xcfad, 0x55f0, 0xa780, 0xf31f, 0x2afb, 0x50c3, 0xc194, 0x82ab, 0x8c65, 0xacc9, 0x0113, 0x0218,
    0x3a0e, 0xa58d, 0xdc04, 0xcfff, 0x07a2, 0xd593, 0xc13b, 0x2d04, 0xd80d, 0x82da, 0xfd14, 0xcf92, 0x6acf, 0x661b, 0x7ebb, 0x56f8,
    0x9c95, 0x5c82, 0x4ca1, 0x6f39, 0xc5ca, 0x98d9, 0x54e2, 0xa499, 0xd91b, 0x85c7, 0x9738, 0x4a6a, 0xc2c8, 0xedea, 0x31d7, 0xc711,
    0x6114, 0x0685, 0xe3bf, 0x8ae0, 0x4f76, 0x8bf3, 0x4d6e, 0xb1fd, 0xe8e3, 0x6df9, 0x271c, 0x6a5b, 0xf28f, 0xab60, 0xdf8b, 0x736d,
    0x5d51, 0x8e79, 0x92c3, 0xe4b6, 0xf4d8, 0x9a0d, 0xa220, 0x0698, 0xfea2, 0x4a39, 0x919b, 0x8ff3, 0x0942, 0xdb11, 0xaddb, 0x020a,
    0x281c, 0x9532, 0x6276, 0x57fa, 0x8f9c, 0x662d, 0x488d, 0x0739, 0x4e08, 0xe486, 0xc4e8, 0xabf0, 0x4f1b, 0xe69e, 0xfee6, 0x0e7d,
    0x931f, 0x2961, 0xf944, 0xdbee, 0x5224, 0x0465, 0x2149, 0x5934, 0xaf30, 0xcbf7, 0x4b86, 0x3f2f, 0xd18b, 0x9d0f, 0xd713, 0x63ad,
    0x9d2a, 0xf236, 0x12d9, 0xfb74, 0xc9c8, 0x56af, 0xcbc2, 0x7eb3, 0x5ef0, 0x1cc5, 0x090a, 0x9359, 0x6f27, 0xdbd4, 0x681e, 0x95dc,
    0x8c98, 0x5134, 0x2768, 0x1e2f, 0xc1f6, 0xe0c9, 0xcf8b, 0x73d6, 0xe6ea, 0x8a92, 0x3d04, 0xd8b6, 0x3961, 0xf9ff, 0x6055, 0x56cf,
    0xaba2, 0x1d49, 0x948d, 0xccc2, 0x0982, 0x1bd1, 0x6a2f, 0x86fb, 0x9819, 0x9422, 0x636d, 0x5dea, 0x35c2, 0x9628, 0x4b71, 0xc8d8,
    0x57b4, 0xc1d2, 0xc4ed, 0xaef5, 0x1f39, 0xc6eb, 0x8ae5, 0x4a73, 0xdbd1, 0x6d1b, 0xc5fe, 0xaced, 0x2537, 0x6366, 0x56e1, 0x858c,
    0xdc73, 0xb888, 0x04c5, 0x81e9, 0xfd3a, 0xe1bc, 0xabf5, 0x4a1e, 0xb6bc, 0xde93, 0x7a7e, 0xd711, 0x61af, 0xbd3e, 0xe754, 0x2527,
    0x7376, 0x464a, 0x2e9c, 0x7388, 0xb8b4, 0x38f9, 0x706c, 0x6f4d, 0xb1be, 0xaba0, 0x1f4b, 0xb499, 0xd9a0, 0x3e7c, 0x93d3, 0xe5ad,
    0xfec8, 0x2053, 0x5225, 0x0564, 0x3143, 0x5385, 0xb4cf, 0x8ff6, 0x0c47, 0x8b33, 0x8dae, 0x7609, 0x6c12, 0xddfc, 0x260c, 0x6b40,
    0xf89f, 0x113e, 0x2f8e, 0x7091, 0x92b0, 0x97c5, 0xb797, 0xe4b3, 0xf1dd, 0xca2f, 0x8255, 0x729b, 0xbaac, 0x02f7, 0xd5e1, 0xb349,
    0x7e41, 0xac02, 0xcad8, 0x75a2, 0xf4a4, 0xe671, 0x1109, 0x18b9, 0x315a, 0x4a9c, 0x343e, 0x7bdf, 0x67bb, 0xcf10, 0xe84d, 0xc357,
    0x637e, 0x4ef9, 0x1577, 0x22eb, 0xc88b, 0x04e7, 0xa3cb, 0xfc78, 0xb2f5, 0xd3f6, 0xc264, 0x4146, 0x55a1, 0xf6d1, 0xb112, 0x070c,
    0x7b3d, 0x8559, 0x09a6, 0x3ff5, 0x0b51, 0xea14, 0xb818, 0x9455, 0x141a, 0x5e8d, 0x61b8, 0xaa29, 0x87c9, 0xbb20, 0x9f70, 0x8a7a,
    0xd5ec, 0xbe44, 0xae33, 0xd9ff, 0x6123, 0x31b2, 0xa274, 0x52cc, 0xec8d, 0x47bb, 0xce66, 0x8f30, 0xca81, 0x2cfb, 0x36f9, 0x9e0e,
    0xe50f, 0x5c6a, 0xa449, 0x09cb, 0x5298, 0xb8d9, 0x5594, 0xc3e4, 0xd0cd, 0xca42, 0xef38, 0xc113, 0x052c, 0x790b, 0x9179, 0x6d11,
    0xcff4, 0x0ca9, 0x65dd, 0x8b60, 0xdefd, 0x1410, 0x5487, 0xc1fc, 0xeac3, 0x6fcf, 0x333c, 0x0eec, 0x028e, 0xac98, 0x5042, 0x4015,
    0x17f9, 0x8e73, 0x98c9, 0x44f2, 0xb432, 0x720b, 0x2a3c, 0x9704, 0x7656, 0x334d, 0x7f9d, 0x61d5, 0xc744, 0x3441, 0x04a0, 0xe48c,
    0xcee2, 0x0bb4, 0x0ff1, 0x0e98, 0x76fa, 0x9fe1, 0x1beb, 0x5015, 0x1742, 0x35c8, 0x9c22, 0xeb35, 0x8832, 0xbfb2, 0x49ce, 0x5571,
    0x2601, 0x664d, 0x28ed, 0x64c3, 0x8475, 0x3481, 0xc460, 0x2378, 0x4a13, 0xbbb1, 0x0ee1, 0x0f83, 0x7cea, 0x25bf, 0xebee, 0x53e9,
    0xd8a3, 0x2c74, 0xb976, 0xeb30, 0x8d37, 0xef90, 0x69bb, 0x2172, 0x620f, 0x2e83, 0x6c97, 0x5879, 0xf376, 0x4392, 0xa363, 0x54d0,
    0x96ab, 0xc8f2, 0x7d9e, 0x40c0, 0xc22c, 0x090e, 0x975d, 0x2f0f, 0xf110, 0x07e2, 0x95d3, 0x8397, 0xa152, 0x47f7, 0x822a, 0x0de4,
    0x399b, 0x0305, 0x3618, 0x7fef, 0x13a7, 0x9401, 0x404e, 0x4ca2, 0x6c3a, 0xf5d4, 0x870a, 0x78e3, 0x689a, 0x1158, 0x49e8, 0x7357,
    0x676b, 0x1fc0, 0x3f12, 0xecb6, 0x7c80, 0x4fd5, 0x2850, 0xd97e, 0xe0a2, 0xa4e0, 0xa062, 0x66cc, 0xa96c, 0xf191, 0x8663, 0x0081,
    0x8181, 0x9552, 0x0216, 0x3400, 0x45e1, 0xb62a, 0x4805, 0x8fb1, 0x4b00, 0xb9a9, 0x34ef, 0xaa0e, 0xa0ee, 0xea40, 0xec4c, 0x867a,
    0x1998, 0x0170, 0x617b, 0x69ea, 0x7023, 0x2002, 0x0374, 0x4769, 0x1cb4, 0x787b, 0xf002, 0x04fb, 0xbfd7, 0x2cab, 0x66a9, 0xcc09,
    0xc249, 0x6c6b, 0xa485, 0xc507, 0x5514, 0x4364, 0x5595, 0xc2e5, 0xc0c7, 0xc0f3, 0xf4c7, 0x8512, 0x42ed, 0xcd17, 0xcd5c, 0x8617,
    0x74f5, 0xb2f8, 0xdefb, 0x1216, 0x34bb, 0xfe5a, 0xb2c1, 0xe7c2, 0xb3b1, 0x86b9, 0xda5b, 0xf69a, 0xfa59, 0xf5ee, 0xbd30, 0xe95a,
    0xc54b, 0x1958, 0xc1b0, 0xa68f, 0xed1b, 0xc026, 0x2112, 0x026f, 0x4d79, 0xa6ea, 0x887e, 0xf3fe, 0xcb1a, 0xa66b, 0x09ff, 0x66ac,
    0xc90c, 0x926b, 0x4c1e, 0xd086, 0x8109, 0x1dda, 0x071e, 0x692f, 0xb5e6, 0xb7d4, 0xa7f0, 0x836f, 0x59aa, 0x31ae, 0xbe68, 0x821f,
    0x38d1, 0x5844, 0xce4b, 0xa21d, 0x3ba5, 0x1f2d, 0xd2ff, 0xda66, 0xcba7, 0x1bd6, 0x6d28, 0xf6cd, 0xad0e, 0xd7df, 0xaf61, 0x9aa6,
    0x098b, 0x12d8, 0xfa75, 0xd9c2, 0x5c1e, 0xd03d, 0x3ab2, 0x1931, 0xa8d9, 0x552f, 0x785f, 0xd426, 0x6585, 0xd338, 0x0caa, 0x66de,
    0xbb7e, 0xc12e, 0x3811, 0x9884, 0x09bf, 0x26ec, 0x8ba0, 0x1e3d, 0xd3e4, 0xd076, 0x71f9, 0xebd3, 0x6ed4, 0x392c, 0xb4b2, 0xf28b,
    0xaf64, 0x9fa3, 0x59a9, 0x32ad, 0x8e76, 0x9dcc, 0x14d0, 0x9447, 0x0608, 0x6e32, 0xdfca, 0x322c, 0x0ff7, 0x089e, 0x16c6, 0xa047,
    0x43e9, 0xd818, 0x97cf, 0xbd9d, 0x44f7, 0xb137, 0x2229, 0x0a49, 0xe307, 0x3258, 0x7b83, 0x3be7, 0x5d6f, 0xb047, 0x4352, 0x63a3,
    0x9324, 0x125a, 0x78f7, 0x7c8e, 0x41db, 0xc83c, 0xb350, 0x6758, 0x2cf3, 0x3ef1, 0x1e5e, 0xb087, 0x8392, 0xa457, 0x17d5, 0xa25f,
    0x79e7, 0x7d95, 0x4bcb, 0x7262, 0x4355, 0x64a4, 0xe312, 0x274d, 0x3b0a, 0xb082, 0x8697, 0xf475, 0x37a0, 0xd65c, 0x3de9, 0x355b,
    0x0fb1, 0x4ed8, 0x3456, 0x13b7, 0x8411, 0x50e5, 0xe7b2, 0xc3c1, 0xf5e8, 0xbb36, 0x8966, 0xfaed, 0x415a, 0x49bd, 0x2602, 0x654e,
    0x18f3, 0x7b10, 0xa874, 0xf882, 0x0c23, 0xef57, 0xae7c, 0x96b0, 0xd3e9, 0xdd7b, 0xa18b, 0x9e2e, 0xc52f, 0x7d3c, 0xe262, 0x4636,
    0x52e0, 0xc0a1, 0xa695, 0xf701, 0x70c9, 0xcae8, 0x4592, 0xc559, 0x0b4a, 0xf10f, 0x18fd, 0x751e, 0x4818, 0x92ac, 0x8bd9, 0x6744,
    0x30ef, 0xee22, 0xca02, 0xaf78, 0x83bf, 0x897a, 0xe6f1, 0x9189, 0x9de1, 0x39fd, 0x6563, 0x35de, 0x8a34, 0x9ba2, 0x1c84, 0x484b,
    0xc1ff, 0xe9c0, 0x5fd1, 0x2cef, 0x22ed, 0xce8d, 0x64db, 0x9c6d, 0xa47a, 0x3af8, 0x537b, 0x4a31, 0x9993, 0x0fa3, 0x5cca, 0x04e9,
    0xadc5, 0x1c14, 0xd8db, 0x540c, 0x4a77, 0xdfd5, 0x2d33, 0xef3a, 0xc311, 0x2538, 0x6c69, 0xa687, 0xe513, 0x4076, 0x749a, 0xdd97,
    0x4d67, 0xb8f4, 0x78b9, 0x32c0, 0xe31b, 0x2e44, 0xab50, 0xefbb, 0x4290, 0xb06a, 0x6e7f, 0x9287, 0xa0f2, 0xf65c, 0x3c9f, 0x5226,
    0x0667, 0x015d, 0x4c56, 0x98ce, 0x43f5, 0xc404, 0x471c, 0x69c1, 0x5b08, 0xb11a, 0x0f04, 0xfb6d, 0xd0d1, 0xd65e, 0x3feb, 0x154f,
    0x1ad3, 0x7926, 0xbc54, 0x9c35, 0xfc22, 0xe8af, 0x21b5, 0xa5c8, 0x9941, 0xdd71, 0xab81, 0x3e6a, 0x85c5, 0x953a, 0x6a7e, 0xd7aa,
    0xda14, 0xb9d5, 0x4893, 0x1927, 0xbecf, 0x25b8, 0xece9, 0x23df, 0xedb4, 0x6f89, 0x757a, 0x2c7c, 0xb17e, 0x6b60, 0xd8bf, 0x3068,
    0x69a5, 0x3f6c, 0x92c8, 0xefbd, 0x4496, 0xd056, 0x51d9, 0xca85, 0x28ff, 0x76d1, 0xb4ca, 0x8af3, 0x5c65, 0xab46, 0xf9ad, 0x3207,
    0x24dc, 0x9986, 0x1ab6, 0x1c43, 0x8f8c, 0x763d, 0x5826, 0xac29, 0xe1f3, 0xe4ba, 0xf8d4, 0x5a75, 0xdd6c, 0xb69c, 0xfeb3, 0x5b28,
    0x913a, 0x2e52, 0xbd46, 0x9f2c, 0xd626, 0x4793, 0xe64e, 0x2e36, 0xd922, 0xbcfe, 0x369f, 0xf868, 0xe6c9, 0xa9b1, 0x2c4c, 0x814e,
    0x5a9d, 0x3584, 0xd06e, 0x69e1, 0x7b28, 0x904c, 0x492f, 0xb490, 0xd0a9, 0xae26, 0xccea, 0x21aa, 0xbad7, 0x798c, 0x16fe, 0x987f,
    0xf244, 0x60ab, 0xa831, 0xbdc7, 0x1ead, 0x4374, 0x4585, 0xd24e, 0x6bd7, 0x6f08, 0xf4fb, 0xb92e, 0xb368, 0x5f60, 0x9d5e, 0x8642,
    0x21a0, 0xb0dd, 0xd9c8, 0x5614, 0x7079, 0x7a58, 0xf137, 0x20c5, 0xc4b3, 0xf0ab, 0xad52, 0x8b83, 0x3d1e, 0xc2ac, 0x898e, 0x1205,
    0x27a8, 0xdeef, 0x0602, 0x6438, 0x7f8e, 0x72c6, 0xe7f1, 0x8082, 0x875a, 0x28b3, 0x3a9d, 0x361e, 0x79e9, 0x739b, 0xaba7, 0x184c,
    0xc4af, 0xecb7, 0x7d81, 0x5fdf, 0x22e1, 0xc281, 0xa4a3, 0xe321, 0x147e, 0x3ae9, 0x426a, 0x4a90, 0x3832, 0xbba7, 0x18f7, 0x7f14,
    0xe85c, 0xd246, 0x63df, 0xef58, 0xa173, 0x66d6, 0xb376, 0x417e, 0x6d99, 0x477c, 0x09a1, 0x38f2, 0x7b67, 0xdf03, 0xfbe5, 0x5859,
    0xd356, 0x62c4, 0xe548, 0x1b2d, 0x96d3, 0xb08a, 0x8e9f, 0x7425, 0x6228, 0x09a4, 0x3df7, 0x2b45, 0xff76, 0x8fe6, 0x1c57, 0x9b98,
    0x26be, 0xd9f2, 0x6c2e, 0xe1c0, 0xd789, 0xf937, 0xa89d, 0x116b, 0x7adb, 0x72b4, 0x9583, 0xd3c7, 0xf355, 0x60b1, 0xb22b, 0x0d28,
    0xf557, 0x0489, 0xcda5, 0x7fee, 0x12a6, 0x840b, 0x4aff, 0x575d, 0x283b, 0xb215, 0x3316, 0x24c6, 0x839c, 0xaa59, 0xf7b9, 0xc871,
    0xfe1d, 0xf586, 0xd558, 0x0af0, 0x5abe, 0x16a7, 0xc126, 0x3019, 0x18d4, 0x5c37, 0xf914, 0x8bbe, 0x0023, 0x2323, 0x1148, 0x59f8,
    0x63fc, 0xcc7b, 0xb03b, 0x3f2e, 0xd08a, 0x8d05, 0xdda2, 0x7852, 0xd92b, 0xb5f7, 0xa6c5, 0xa751, 0x22ce, 0xedae, 0x7593, 0xc595,
    0xc786, 0xf683, 0xe340, 0x751f, 0x4919, 0x82a6, 0x8168, 0x7cbb, 0x74ee, 0xa9e3, 0x7e1e, 0xf35d, 0x68b9, 0x327b, 0x58a0, 0x2aaf,
    0x0497, 0xd3bb, 0x8f29, 0xd398, 0xac0a, 0xc2d0, 0xf5f2, 0xa12c, 0x3989, 0x1117, 0x06a7, 0xc19d, 0x8ba2, 0x1c3f, 0xf3f0, 0xc514,
    0x4607, 0x63d1, 0xe156, 0x411f, 0x0cf8, 0x348c, 0xc96d, 0xf30a, 0x3fee, 0x104a, 0x4af1, 0x5953, 0xc857, 0xd83b, 0xb4ec, 0xacd5,
    0x1d0f, 0xd2cb, 0xee52, 0xba72, 0xdc29, 0xe2d2, 0xf686, 0xe645, 0x253d, 0x696c, 0xf6a5, 0xc566, 0x3475, 0x3094, 0x9559, 0x091d,
    0x844e, 0x0fba, 0x45d3, 0x8418, 0x59ec, 0x77e8, 0x9cf8, 0x31ef, 0xff29, 0xd0b9, 0xbe36, 0xdc41, 0x8aba, 0x152c, 0x79b0, 0x2ac2,
    0x69fa, 0x6033, 0x30a9, 0xa864, 0xe892, 0x1c88, 0x4447, 0x0187, 0x968c, 0xefd5, 0x2cfe, 0x33fc, 0xce2c, 0xc57a, 0x2869, 0xe047,
    0x4105, 0x16e2, 0x8463, 0x2297, 0xb4f7, 0xb7ce, 0xbdea, 0x3380, 0xb250, 0x7653, 0x3648, 0x2fbf, 0x41a0, 0xb347, 0x704f, 0x4c6e,
    0xa0f6, 0xf258, 0x7cb7, 0x78e2, 0x699b, 0x0152, 0x4359, 0x68a8, 0x236a, 0x5801, 0x8b0e, 0xb093, 0x9786, 0xf4d4, 0x9601, 0x6258,
    0x79d4, 0x4ea6, 0x4a28, 0x808a, 0x8f52, 0xa8e3, 0x6f15, 0xe9e6, 0x79f7, 0x6d85, 0x5b60, 0xd972, 0xecae, 0x6498, 0xdf2e, 0xd6c8,
    0xa97d, 0xe080, 0x86c2, 0xa120, 0x3585, 0xd16f, 0x79eb, 0x7199, 0x8bb3, 0x0d2e, 0xf351, 0x64b5, 0xf203, 0x27ec, 0x9aab, 0x0486,
    0xc2aa, 0x8f88, 0x7239, 0x180e, 0x86ed, 0x8e0f, 0xe4b5, 0xf7db, 0xaa13, 0xbdf3, 0x2a99, 0x32a1, 0x827a, 0x5db4, 0x6b9c, 0x2443,
    0x0619, 0x7f23, 0xdf6b, 0x938d, 0xbbf3, 0x4ca3, 0x6d3b, 0xe5de, 0x8dbb, 0x631c, 0x2c9b, 0x5699, 0xfdf4, 0x2f72, 0x8c6d, 0xa4c1,
    0x8143, 0x5790, 0xe5f6, 0xa593, 0xc21a, 0x3f38, 0xc69c, 0xfd92, 0x4914, 0x8fab, 0x511a, 0x0946, 0xdf15, 0xedf3, 0x28ce, 0x47e0,
    0x953d, 0x6d79, 0xa79c, 0xef03, 0xfa28, 0x849f, 0xde6b, 0x8286, 0xa148, 0x5ded, 0x32c5, 0xe61e, 0x7e66, 0x8b25, 0x9bb8, 0x069e,
    0xf8a4, 0x2a05, 0xae3d, 0xd7f1, 0x814f, 0x5b9c, 0x258e, 0xdadf, 0x721e, 0x3f29, 0xd78d, 0xfd33, 0xe8b5, 0x3baf, 0x1527, 0x72bb,
    0x9a8c, 0x23a1, 0x93ca, 0xfcb4, 0x7e39, 0xd47a, 0x39d9, 0x4147, 0x54a0, 0xe6db, 0xbba3, 0x1cf3, 0x3f3c, 0xc298, 0xbdba, 0x63d0,
    0xe057, 0x5115, 0x0649, 0x2f73, 0x8d6c, 0xb4cb, 0x8bf2, 0x4c6f, 0xa1f7, 0xe252, 0x7606, 0x631d, 0x2d9a, 0x4693, 0xf745, 0x348d,
    0xc86c, 0xe300, 0x355f, 0x0bb5, 0x0ef0, 0x1e92, 0x7c4b, 0x841e, 0x5fea, 0x17d4, 0xa35e, 0x69ed, 0x7724, 0x5034, 0x3663, 0x0494,
    0xd0b8, 0xbf37, 0xcc4b, 0x800b, 0x0ed3, 0x3db1, 0x6d03, 0xdde6, 0x3c16, 0xdbaf, 0x1365, 0x56c3, 0xa7ae, 0xdd31, 0xebc1, 0x7cc6,
    0x0993, 0x0ac0, 0x6a8e, 0x275a, 0x2c1d, 0xd01f, 0x1890, 0x1873, 0xfb90, 0x2d2c, 0xf025, 0x23dc, 0xeeb7, 0x5f97, 0x6aa9, 0x007d,
    0x7d7d, 0xa323, 0x1490, 0xd407, 0x44a4, 0xe264, 0x4030, 0x32dc, 0xff07, 0xfe97, 0x7f0c, 0xf044, 0x42bd, 0x9d47, 0x9f5b, 0xa151,
    0x44f4, 0xb234, 0x1237, 0x159a, 0xcf06, 0xfe5b, 0xb3c0, 0xf7c8, 0xb900, 0x9d46, 0x9e5a, 0xb15b, 0x4e45, 0xa9cb, 0x5636, 0x525b,
    0x7b1a, 0xa27e, 0x58c6, 0x4cc9, 0x0751, 0x2660, 0x072c, 0x5b1d, 0xa40f, 0x4f8d, 0x7008, 0x0b29, 0x926c, 0x4b19, 0xa0b0, 0xb41e,
    0x5e27, 0xcb12, 0xae63, 0x89af, 0x3324, 0x16f4, 0x9275, 0x5200, 0x2041, 0x4037, 0x35db, 0x8f31, 0xcb80, 0x3cf1, 0x3c48, 0x85f1,
    0xa10e, 0x1bab, 0x1055, 0x55ee, 0xb99e, 0x03d8, 0xebc5, 0x78c2, 0x49bb, 0x2004, 0x0572, 0x2755, 0x2312, 0x2079, 0x780f, 0x8476,
    0x3782, 0xf47e, 0x3cab, 0x6612, 0x77b2, 0xc6a2, 0xc3ac, 0x9885, 0x08be, 0x36e6, 0x8111, 0x05c2, 0x97e5, 0x97b7, 0xc5e5, 0xb7f6,
    0x85d2, 0x822d, 0x0ae3, 0x49ad, 0x3612, 0x75e5, 0xb3e3, 0xd4eb, 0xa848, 0xc4be, 0xfda6, 0x7d20, 0xfe7e, 0x96e5, 0x86bc, 0xdf5e,
    0xa6b8, 0xda2c, 0x81ed, 0xf93e, 0xa194, 0x8131, 0x25e2, 0xb6b3, 0xd19c, 0x8a18, 0xb78e, 0xfdaa, 0x712c, 0x3e06, 0xe9a9, 0x36b8,
    0xdf4f, 0xb7a9, 0xda8d, 0x204c, 0x4d3a, 0xe5a9, 0xfacc, 0x607b, 0x78e1, 0x6a98, 0x314c, 0x5c8a, 0x44a9, 0xef69, 0x9042, 0x4721,
    0x54fc, 0xba87, 0x29dc, 0x44f9, 0xbf39, 0xc245, 0x6067, 0x64fd, 0xba4b, 0xe510, 0x4375, 0x4484, 0xc244, 0x6166, 0x74f7, 0xb0fa,
    0xfeef, 0x0774, 0x0345, 0x7658, 0x3d43, 0x9ff1, 0x0bfb, 0x40be, 0xbc52, 0x9a33, 0x9c1e, 0xd709, 0x79b7, 0x2dc5, 0x19cc, 0x5524,
    0x7354, 0x6468, 0x2fde, 0x20c1, 0xc0b7, 0xb083, 0x8796, 0xe47f, 0x3d11, 0xcda3, 0x79e8, 0x729a, 0xbbad, 0x12fd, 0xdf50, 0xa8b6,
    0x3a40, 0xebc3, 0x7ec4, 0x2987, 0x1fa2, 0x5d70, 0xaf58, 0xa39f, 0xa82c, 0xa0da, 0xde74, 0x9d99, 0x4185, 0x9662, 0x013b, 0x2a30,
    0x9b08, 0xb62e, 0x4c01, 0xcf99, 0x61c4, 0xd655, 0x34e0, 0xa501, 0x5088, 0x8adf, 0x7049, 0x4a68, 0xc0ca, 0xcdfe, 0x24b5, 0xf0ef,
    0xe916, 0x8907, 0x9b8c, 0x32aa, 0x8971, 0xedfa, 0x21c7, 0xd7ba, 0xca04, 0xa97e, 0xe383, 0xb6dc, 0xbef3, 0x1984, 0x1d6c, 0xb1a8,
    0xbdb6, 0x6fdc, 0x202f, 0x2e59, 0xb64d, 0x2f62, 0x9c7d, 0xb46a, 0x2a53, 0xf86b, 0xe5ca, 0x99af, 0x339f, 0xad4f, 0x969e, 0xfdc7,
    0x1c41, 0x8d8e, 0x5629, 0x4d44, 0x9bd7, 0x69f1, 0x6b38, 0x80e7, 0xe23f, 0x1b6b, 0xd095, 0x921a, 0x3d6f, 0xb3dd, 0xead5, 0x79d9,
    0x43ab, 0x9a5a, 0xf577, 0x24a9, 0xecf3, 0x39c5, 0x5d5b, 0x8473, 0x3287, 0xa45c, 0x1cde, 0x1211, 0x33bc, 0x8e6c, 0x87d6, 0xa43f,
    0x7fbd, 0x41f5, 0xe612, 0x726a, 0x4b5d, 0xe4f4, 0xb69a, 0xf8b5, 0x3b14, 0xae9c, 0x7650, 0x354b, 0x1fa1, 0x5e73, 0x9f46, 0xbc4c,
    0x842d, 0x6cd9, 0x1637, 0x51b6, 0xa5ea, 0xbb63, 0xdc33, 0xf8c8, 0x4669, 0x0dbf, 0x62c0, 0xe14c, 0x5b05, 0xbc17, 0xdf76, 0x8e90,
    0x7b2a, 0x924e, 0x693b, 0xa1f2, 0xe757, 0x2624, 0x4368, 0x5999, 0x029d, 0xbf8b, 0x70f7, 0xf4d6, 0x9403, 0x424c, 0x6cb6, 0x7958,
    0xc22a, 0x0f08, 0xf761, 0x10a9, 0xa912, 0x8fef, 0x155e, 0x0bc2, 0x7987, 0x1df5, 0x2831, 0xb81f, 0x9352, 0x642c, 0x6b9a, 0x2245,
    0x6625, 0x4085, 0x8769, 0x1b80, 0x3b7e, 0xc4f6, 0xb5ee, 0xbfdc, 0x27a0, 0xd6e7, 0x8652, 0x31b0, 0xa076, 0x72d8, 0xf9ef, 0x7045,
    0x4664, 0x00b2, 0xb2b2, 0x94b1, 0xf0fe, 0xf807, 0x89a6, 0x3a2d, 0x86ae, 0xcd4c, 0x9607, 0x645e, 0x19e8, 0x7100, 0x122a, 0x0887,
    0x0fdf, 0x20b6, 0xb7c0, 0xb3e4, 0xd3ec, 0xd87e, 0xf1a9, 0xbe5b, 0xb12c, 0x3932, 0xaaac, 0x024c, 0x6e5a, 0xb7a2, 0xd186, 0x9002,
    0x0761, 0x1650, 0x36d1, 0xb626, 0x4409, 0x4fc9, 0x344c, 0x09ad, 0x34fe, 0xbb1f, 0xa04f, 0x4be1, 0x5848, 0xc247, 0x6265, 0x44e9,
    0xaf29, 0xd2ee, 0xcb77, 0xcb06, 0xba77, 0xd92c, 0xb2f0, 0xd6f3, 0x9246, 0x6133, 0x21a2, 0xb2df, 0xf9dc, 0x4376, 0x4787, 0xf25a,
    0x7eb5, 0x58f6, 0x7cf9, 0x36ac, 0xcb5b, 0xe72a, 0x5b59, 0xe04b, 0x4d09, 0xd69a, 0xfb2f, 0x9293, 0xb4e6, 0xa6df, 0xbd4b, 0x9221,
    0x0654, 0x326e, 0x4db5, 0x6a26, 0x8ff2, 0x0843, 0xcb1b, 0xa76a, 0x19f5, 0x6c1d, 0xd2f3, 0xd66a, 0x0bdf, 0x649a, 0xdd2c, 0xf6dc,
    0xbc1f, 0xd77e, 0x0ec0, 0x2ea2, 0x4db6, 0x6925, 0xbfec, 0x1790, 0xe71a, 0x6b69, 0xd1b6, 0xa032, 0x369c, 0xfb6b, 0xd6d7, 0xb662,
    0x004d, 0x4d4d, 0x92de, 0xf9ab, 0x3401, 0x44e0, 0xa620, 0x42b4, 0x944e, 0x0f01, 0xfe68, 0x80f3, 0xf62b, 0x4be8, 0x5141, 0x521d,
    0x3d5c, 0x80ee, 0xeb36, 0x8b31, 0x8fac, 0x561d, 0x7970, 0xea02, 0xae0e, 0xe4c2, 0x80ac, 0xa974, 0xe989, 0x1698, 0xfe19, 0xf182,
    0x9570, 0x2034, 0x3542, 0x16a8, 0xce29, 0xc07f, 0x784b, 0xc032, 0x3506, 0x52ec, 0xccad, 0x66ed, 0x884d, 0xc0cd, 0xcaf9, 0x5483,
    0xc5f8, 0xaaeb, 0x450b, 0x5cc0, 0x0ee3, 0x0d81, 0x5cfe, 0x30dd, 0xdc10, 0xdbeb, 0x5721, 0x5447, 0x013c, 0x2d37, 0xeb3e, 0x8339,
    0x0ffc, 0x0395, 0xa688, 0xea1c, 0xb010, 0x1405, 0x4192, 0x8175, 0x61a6, 0xb437, 0x770e, 0x7a1e, 0xb771, 0x0255, 0x7743, 0x3753,
    0x25af, 0xfbfe, 0x4342, 0x73b3, 0x838f, 0xb94a, 0xd70c, 0x7cb2, 0x7de7, 0x39b9, 0x2127, 0x375a, 0x2ca6, 0x6ba4, 0x1c7b, 0xb7b4,
    0xc790, 0xe095, 0x93d7, 0xe1a9, 0xbee0, 0x0a97, 0x3dd9, 0x056b, 0x3e4c, 0xa3e3, 0xd450, 0x13f3, 0xc055, 0x5261, 0x4120, 0x33c7,
    0xf517, 0x44c9, 0x8f09, 0xf3b8, 0x8d5c, 0x84fb, 0xba0f, 0xa154, 0x41f1, 0xe216, 0x3242, 0x6199, 0x8b08, 0xb695, 0xf7ba, 0xcb72,
    0xce03, 0xea55, 0xf959, 0xc6f3, 0x92fd, 0xda88, 0x2549, 0x1d18, 0xc5dc, 0x8ecf, 0x2475, 0x302f, 0x2ee2, 0x0df6, 0x2b89, 0x33ba,
    0x886a, 0xe7ea, 0x9b99, 0x27bf, 0xc9f8, 0x669f, 0xfa3f, 0x9388, 0xbef6, 0x1c81, 0x4d4e, 0x91dd, 0xc9b5, 0x2bd2, 0x68e1, 0x6a23,
    0x8af7, 0x5861, 0xeb6e, 0xd369, 0x5dfb, 0x24d3, 0x9689, 0xead0, 0x7cdc, 0x1389, 0xba2f, 0x8174, 0x60a7, 0xa43d, 0x7dbf, 0x61e1,
    0xf370, 0x4594, 0xc35f, 0x6b76, 0xcea9, 0x40ff, 0xfd13, 0xc895, 0x1af9, 0x530c, 0x3d46, 0x9af4, 0x5bd9, 0x60cb, 0xc851, 0xde3d,
    0xd4d0, 0x9373, 0x450d, 0x5ac6, 0x6edf, 0x3227, 0x04fc, 0xb8d0, 0x5c9d, 0x53be, 0x8ff4, 0x0e45, 0xab27, 0x98cc, 0x41f7, 0xe410,
    0x527e, 0x5e3f, 0xd30a, 0x3e98, 0x7737, 0x4327, 0x16d6, 0xb057, 0x5342, 0x7308, 0x3834, 0xbda1, 0x78cb, 0x40b2, 0xb05e, 0x5a4b,
    0xe352, 0x670d, 0x79a6, 0x3cd4, 0x196d, 0xf485, 0xc750, 0x2055, 0x5423, 0x6558, 0x0ee5, 0x0b87, 0x3cc2, 0x0f7b, 0x8412, 0x53e6,
    0xd7ac, 0xdc12, 0xd9e9, 0x7735, 0x4125, 0x36c2, 0xa535, 0x64bc, 0xfb0a, 0xb7b6, 0xc592, 0xc081, 0x86b5, 0xd657, 0x36e2, 0x8515,
    0x45ea, 0xbd21, 0xf84b, 0xc5ea, 0xb8f9, 0x75b4, 0xe2b2, 0x96e6, 0x85bf, 0xef40, 0xb96b, 0xf62d, 0x4dee, 0x317d, 0x6dbb, 0x655e,
    0x08e3, 0x6bbb, 0x0364, 0x5779, 0x0c1f, 0xd36b, 0x5ff9, 0x04c7, 0x83eb, 0xdd2e, 0xf4de, 0x9c0b, 0xc21c, 0x393e, 0xa6a0, 0xc234,
    0x1116, 0x07a6, 0xd197, 0x8113, 0x07c0, 0xb7f1, 0x82d5, 0xf21b, 0x3ff4, 0x0a50, 0xfa1e, 0xb2a9, 0x8faa, 0x501b, 0x194c, 0xd5a4,
    0xf60c, 0x6ccf, 0x0021, 0x2121, 0x315c, 0x4c9a, 0x5402, 0x4479, 0x3fb9, 0x471d, 0x68c0, 0x4b02, 0xbbab, 0x14fb, 0xbf6c, 0x9710,
    0x6242, 0x63ce, 0xfe49, 0xa1d2, 0xc777, 0x0772, 0x0543, 0x1664, 0x02e5, 0xc7f3, 0x83f6, 0xc033, 0x3407, 0x42e6, 0xc61c, 0x7d12,
    0xcc4c, 0x870c, 0x7ee5, 0x08a6, 0x2efe, 0x11ea, 0xfb5a, 0xe7e6, 0x9795, 0xe7c7, 0xb6b4, 0xd69b, 0xfa2e, 0x8299, 0xbe57, 0xbd20,
    0xf94a, 0xd5e0, 0xb248, 0x6e4b, 0xa6b3, 0xd127, 0x31a3, 0xb365, 0x526d, 0x4d2c, 0xf3bf, 0x8a5b, 0xf4cd, 0x8f18, 0xe2a9, 0x8dfd,
    0x255a, 0x0e0b, 0xe569, 0x3a0c, 0xa78f, 0xfc10, 0xda9d, 0x305c, 0x5d91, 0x4eb9, 0x5537, 0x6047, 0x44dd, 0x9b1d, 0xa33b, 0x0c88,
    0x44fc, 0xba3c, 0x9267, 0x4012, 0x10fe, 0xfe45, 0xadde, 0x070f, 0x783e, 0xb547, 0x1675, 0x13f4, 0xc752, 0x2257, 0x7437, 0x703a,
    0x391b, 0x8385, 0xb340, 0x7748, 0x3c58, 0x95e1, 0xb1a5, 0xb0bb, 0xbfae, 0x55d2, 0x85a2, 0xf25d, 0x79b2, 0x28c0, 0x49ee, 0x7551,
    0x0757, 0x2066, 0x6710, 0x64bb, 0xfc0d, 0xc780, 0xf085, 0x837c, 0x4ab9, 0x111b, 0x0aab, 0x01e5, 0xf4ee, 0xac3b, 0xf3e1, 0xd405,
    0x46a6, 0xc270, 0x5552, 0x0522, 0x7705, 0x7115, 0x073f, 0x480e, 0x84ba, 0xfb4e, 0xf3f2, 0xc716, 0x6613, 0x76b3, 0xd6a8, 0xc91d,
    0x837a, 0x4cbf, 0x7127, 0x350d, 0x59e7, 0x7ce3, 0x2cb6, 0x7bb4, 0x0cd0, 0x1ca4, 0x686b, 0xe0a9, 0xafeb, 0x102c, 0x2c97, 0x5a95,
    0x3d8c, 0x503e, 0x3c69, 0xa4d0, 0x9052, 0x5731, 0x4457, 0x1197, 0x8627, 0x44c5, 0x8305, 0x33c0, 0xf210, 0x34ff, 0xba1e, 0xb045,
    0x4150, 0x43b7, 0x8646, 0x25a4, 0xf0f5, 0xf30c, 0x39e8, 0x7076, 0x7557, 0x0151, 0x405a, 0x58b6, 0x3cb9, 0x7400, 0x470d, 0x78d0,
    0x5ba9, 0x10bb, 0xbb00, 0xbf50, 0xab2c, 0x93c7, 0xf1b9, 0xae4b, 0xa187, 0x9222, 0x0557, 0x0270, 0x5266, 0x4627, 0x43f1, 0xc000,
    0x0734, 0x4305, 0x34f4, 0xb115, 0x000b, 0x0b0b, 0xb04e, 0x4a5b, 0xf3f9, 0xcc1d, 0xd65d, 0x3ce8, 0x2551, 0x0500, 0x5527, 0x7057,
    0x5476, 0x300d, 0x0cc0, 0x0cb4, 0x78c0, 0x4bb9, 0x0010, 0x1010, 0x10ab, 0xab10, 0xaffb, 0x003c, 0x3c3c, 0xf185, 0x9277, 0x5002,
    0x0055, 0x5555, 0x0225, 0x0733, 0x4402, 0x44c2, 0x8402, 0x43f6, 0xc707, 0x7702, 0x7612, 0x7709, 0x7d19, 0xc747, 0x3742, 0x34be,
    0xfb5f, 0xe2e3, 0xc7b7, 0xc7b2, 0xc2b7, 0x9295, 0xb2e0, 0xc6e3, 0x82ed, 0xca23, 0x8e59, 0xb2e3, 0xc5e0, 0xb2f3, 0xd5f0, 0xa258,
    0x7ee0, 0x0da3, 0x7edc, 0x319f, 0x8f59, 0xa3e8, 0xdf5b, 0xa3bd, 0x8a0e, 0xa198, 0x8d3d, 0xe59a, 0xc9ff, 0x6198, 0x8a09, 0xa69f,
    0xfd0b, 0xd08d, 0x8a02, 0xad94, 0x4d45, 0x9ad6, 0x79fb, 0x6189, 0x9b18, 0xa63e, 0x5caa, 0x6489, 0xce3f, 0xd669, 0x08dc, 0x5484,
    0xc2ff, 0xdadd, 0x701c, 0x1f3d, 0xc2ef, 0xcacd, 0x60b7, 0xb42d, 0x6d14, 0xcaf1, 0x5c8b, 0x45a8, 0xff63, 0x9af3, 0x5cde, 0x10fd,
    0xfd46, 0x9dc0, 0x18dc, 0x543f, 0x7944, 0xde36, 0xdfdb, 0x233d, 0x0f56, 0xa93f, 0xa2c2, 0xe47a, 0x3814, 0x9d81, 0x599d, 0x0699,
    0xffa3, 0x5a33, 0x9b2a, 0x940c, 0x4d43, 0x9cd0, 0x19c7, 0x5e2f, 0xc31a, 0x2e33, 0xdc27, 0xecdc, 0x16ea, 0x8c6b, 0xa2c7, 0xe17f,
    0x6836, 0xbdf4, 0x2d9e, 0x4297, 0xb76d, 0x1e49, 0xa790, 0xe30f, 0x3a50, 0xfbd3, 0x6e6f, 0x8297, 0xb059, 0x5d4c, 0x9364, 0x521a,
    0x3a5b, 0xf0d8, 0xde21, 0xc8cc, 0x43a0, 0x9151, 0x4539, 0x6ef2, 0x1f0a, 0xf5d8, 0x8b06, 0xb89b, 0x17d6, 0xa15c, 0x49f9, 0x6246,
    0x67ca, 0xbe61, 0x8b16, 0xa88b, 0x077d, 0x0a4c, 0xe602, 0x627a, 0x5bf6, 0x4fe4, 0x1961, 0xf889, 0x0728, 0x5f19, 0xe427, 0x6549,
    0x1ff4, 0x0b26, 0x9d63, 0xbb7f, 0xc02f, 0x281b, 0x9235, 0x1240, 0x62ed, 0xcc61, 0xaa21, 0x8fc1, 0x3b70, 0xcaf8, 0x5582, 0xd5f2,
    0xa05a, 0x5ef4, 0x18c1, 0x4922, 0xb99d, 0x00db, 0xdbdb, 0x6711, 0x65ba, 0xec07, 0xcd31, 0xeb7a, 0xc77d, 0x0d78, 0xa507, 0x568e,
    0xeae3, 0x4fef, 0x126a, 0x48c7, 0x4d73, 0xace0, 0x283a, 0xb314, 0x231c, 0x2e77, 0x9863, 0xee58, 0xb078, 0x7c6d, 0xa238, 0x1e80,
    0x6e59, 0xb4a1, 0xe198, 0x8fd1, 0x2b60, 0xda53, 0xfe92, 0x7a09, 0xa066, 0x62c8, 0xe944, 0xdb55, 0xe99f, 0x008e, 0x8e8e, 0x6534,
    0x6289, 0xa805, 0x89f3, 0x6f78, 0x848b, 0xca7f, 0xd205, 0x209c, 0x9dea, 0x32f6, 0xd52d, 0x7f85, 0x79cd, 0x57bf, 0xcad9, 0x74a3,
    0xe4ae, 0xecc0, 0x0af6, 0x5cb8, 0x769b, 0xfe80, 0x681b, 0x90d9, 0xdcba, 0x7141, 0x536b, 0x5a21, 0x8938, 0xa4b3, 0xf331, 0x04d5,
    0x91f9, 0xed91, 0x4aac, 0x040e, 0x4a22, 0x8a80, 0x2f16, 0xe809, 0x8713, 0x61fa, 0xe86b, 0xe571, 0x2214, 0x3774, 0x0288, 0xaa9e,
    0x307e, 0x7fb3, 0x4ffb, 0x067e, 0x1844, 0xcca7, 0x6ce7, 0x2809, 0x8027, 0x22ff, 0xdc9f, 0x5464, 0x221f, 0x3c7f, 0xb2c6, 0xe0c5,
    0xc387, 0xb3ae, 0x99a6, 0x3a96, 0x3d15, 0xc9a7, 0x39c0, 0x585e, 0xd451, 0x12f2, 0xd05f, 0x58d0, 0x5adf, 0x77c6, 0xb2d6, 0xf0d5,
    0xd32c, 0x18be, 0x365d, 0x3aaa, 0x0129, 0x3822, 0xabb7, 0x085c, 0xd404, 0x47a7, 0xd27a, 0x5fe3, 0x1edd, 0x3304, 0x36d4, 0xb323,
    0x142b, 0x6fbc, 0x404f, 0x4da3, 0x7c30, 0xff65, 0x9cf5, 0x3ce2, 0x2f5b, 0xa544, 0x15cd, 0x9851, 0xdc6a, 0xa191, 0x8434, 0x75c0,
    0x96c6, 0xa59f, 0xce16, 0xff40, 0xb9d0, 0x4d96, 0x4905, 0x9eba, 0x51bb, 0xa8e7, 0x6b11, 0xa9ce, 0x5333, 0x0279, 0x5b6f, 0xd67d,
    0x1cc8, 0x0407, 0x432b, 0x1ada, 0x702f, 0x2c0e, 0xc30c, 0x3825, 0xacb0, 0x786a, 0xe113, 0x045a, 0x1e76, 0x98af, 0x2294, 0xb7f4,
    0x87d0, 0xa239, 0x1f81, 0x7e53, 0xbe10, 0xfa67, 0xcbd0, 0x6ca1, 0x6e4f, 0xa2b7, 0x910f, 0x1b67, 0xdc99, 0x5262, 0x4223, 0x03d9,
    0xeac4, 0x68c8, 0x430a, 0x3bfb, 0x4173, 0x6094, 0x970e, 0x7c5c, 0x9309, 0x3f77, 0x89d3, 0x4f58, 0xa5dd, 0x8c54, 0x9df8, 0x20e4,
    0xe592, 0xc1f7, 0xe1c8, 0xdf81, 0x7967, 0xfd15, 0xce93, 0x7ac5, 0x6caa, 0x6544, 0x12f9, 0xdb54, 0xe89e, 0x1084, 0x843f, 0x7ecb,
    0x2688, 0xefc4, 0x3def, 0x335d, 0x6f8d, 0x717e, 0x6c54, 0x9bba, 0x049c, 0xd8b0, 0x3f67, 0x99c3, 0x5ff3, 0x0ecd, 0x23af, 0x9dc4,
    0x1cd8, 0x1417, 0x5380, 0xb1ca, 0xdfd4, 0x2c32, 0xff30, 0xc9a0, 0x3ec7, 0x2868, 0xe146, 0x510f, 0x1c53, 0x9f9c, 0x6696, 0xf336,
    0x03d2, 0xe1cf, 0xd886, 0x0951, 0xc802, 0x8d6e, 0xb6c9, 0xabe6, 0x590d, 0x9609, 0x6a50, 0xf984, 0x1b2e, 0x95d0, 0x8094, 0x914c,
    0x5824, 0xae2b, 0xc1e7, 0xf1d8, 0xcf2a, 0xd277, 0x52ee, 0xceaf, 0x46f9, 0x9d2f, 0xf733, 0x42fb, 0xdb01, 0xbdcb, 0x12a1, 0x830c,
    0x3ac9, 0x624a, 0x6bc6, 0x7e19, 0xf45a, 0x188f, 0x076c, 0x1b5d, 0xe6a3, 0xc3db, 0xeff2, 0x0bd9, 0x629c, 0xbd10, 0xc97a, 0xe41d,
    0x5f73, 0x8e4d, 0xa6f7, 0x9563, 0x3327, 0x15f7, 0xa26b, 0x4dd3, 0x0c40, 0x8c34, 0xfd98, 0x431e, 0x2fef, 0x11f0, 0xe140, 0x5709,
    0x7c6f, 0xa03a, 0x3e94, 0x7b3b, 0x835f, 0x699a, 0x0053, 0x5353, 0x6219, 0x3895, 0x1c00, 0xcccf, 0x048f, 0xcba3, 0x1fd2, 0x2d00,
    0xdc09, 0xc2f2, 0xd7d0, 0xa06e, 0x6ac0, 0x6914, 0x8edd, 0x3667, 0x0090, 0x9090, 0x95f3, 0xa3b7, 0x8004, 0x01dc, 0xcdd7, 0x0d9c,
    0x41e3, 0xf004, 0x02fd, 0xdfeb, 0x130d, 0x3eab, 0x4404, 0x42c4, 0xe43e, 0x7c50, 0x9f05, 0xff0f, 0xf69f, 0xff5c, 0xa5cc, 0x9d45,
    0x9d59, 0x8145, 0x5196, 0x85ca, 0x9a35, 0x9a18, 0xb735, 0x4611, 0x75c7, 0x91c1, 0xd5a9, 0xfb01, 0xbcbd, 0x75dc, 0x8ada, 0x754c,
    0x1a4a, 0xe0bf, 0xb9fd, 0x60bb, 0xb821, 0xad6c, 0xb5bd, 0xec8f, 0x45b9, 0xee72, 0x9a52, 0xfd7f, 0xa4f9, 0xb97b, 0xe63d, 0x5d45,
    0x9a6d, 0xc240, 0x6562, 0x34df, 0x9a3e, 0x9113, 0x077b, 0x0c4a, 0x863e, 0x5ddc, 0x03f4, 0xc7e9, 0x99ec, 0x70dc, 0xdffd, 0x051b,
    0x4e3c, 0xd0b2, 0xb53d, 0x6c0f, 0xc0e1, 0xe6d5, 0xb5ad, 0xfc9f, 0x5512, 0x4562, 0x35a9, 0xfd43, 0x98c5, 0x48fe, 0x744a, 0x0d47,
    0x9a38, 0x9715, 0x6747, 0x33ec, 0xde3c, 0xd5d1, 0x8379, 0x4fbc, 0x4139, 0x2ade, 0x75e6, 0xb0e0, 0xe4f5, 0xb79b, 0xe8bf, 0x31a5,
    0xb563, 0x3251, 0x728a, 0xabbd, 0x0256, 0x7440, 0x074d, 0x3a7c, 0xd7ff, 0x8f41, 0xbbf0, 0x4fa0, 0x5d25, 0xfa0d, 0xa1ba, 0xaf1f,
    0xe4d8, 0x9ab6, 0x199b, 0x0273, 0x5165, 0x7639, 0x5c22, 0xec01, 0xcb37, 0x8b46, 0xf8db, 0x557a, 0x2d0a, 0xd603, 0x62b6, 0x973a,
    0x4868, 0xe2dc, 0xf888, 0x0629, 0x4f13, 0xee96, 0x7eb6, 0x5bf5, 0x4ce7, 0x297f, 0xe75a, 0x2b29, 0x931a, 0x2c64, 0xa966, 0xfb9b,
    0x2627, 0x406b, 0x6987, 0x1d4e, 0x938a, 0xbcf4, 0x3c95, 0x582c, 0xa623, 0x41b7, 0xa450, 0x10d2, 0xd269, 0x4cf0, 0x3e68, 0x87c7,
    0xb52e, 0x7f1c, 0xe054, 0x5216, 0x3657, 0x30a0, 0xa16d, 0x78c8, 0x43b1, 0x8040, 0x4598, 0xcf53, 0xab0e, 0xb1e5, 0xf0fb, 0xfd02,
    0xd984, 0x1a58, 0xf2ad, 0x8942, 0xdec9, 0x2024, 0x2552, 0x0603, 0x6539, 0x6f84, 0x7877, 0xfc0e, 0xc483, 0xc09b, 0x9caf, 0x66b8,
    0xdd18, 0xc2e8, 0xcdca, 0x1081, 0x813a, 0x2ee9, 0x06fd, 0x9bc7, 0x79e1, 0x7b93, 0x2bf7, 0x4dc4, 0x1b57, 0xeca9, 0x639f, 0xaf18,
    0xe3df, 0xea80, 0x2c8c, 0x418e, 0x9d69, 0xb175, 0x606b, 0x68f1, 0x7a33, 0x9a5c, 0xf371, 0x4495, 0xd355, 0x61c7, 0xd556, 0x04fe,
    0xbad2, 0x7c89, 0x46dc, 0xb80a, 0x8647, 0x24a5, 0xe0ff, 0xf9bd, 0x2217, 0x3477, 0x3296, 0xb54d, 0x1c7f, 0xb3b0, 0x87b8, 0xca51,
    0xfc2b, 0xe1a6, 0xb1ef, 0xfaf1, 0x5d46, 0x996e, 0xf25e, 0x7ab1, 0x18de, 0x563d, 0x5950, 0xcb54, 0xe825, 0xab3f, 0x80d4, 0xd10c,
    0x1a88, 0x227d, 0x5e1d, 0xf128, 0x3fda, 0x247e, 0x3b24, 0x9eac, 0x47ad, 0xd870, 0xffa7, 0x5e37, 0xdb02, 0xbec8, 0x22bf, 0x9cdf,
    0x16c8, 0xae49, 0xa385, 0xb236, 0x1035, 0x358e, 0xda64, 0xc9a5, 0x3bc2, 0x784a, 0xc133, 0x250c, 0x585d, 0xd752, 0x22ec, 0xcf8c,
    0x74d1, 0x96dc, 0xbf85, 0x7ef9, 0x14ba, 0xfe2d, 0xc5b6, 0xe4a5, 0xe7cb, 0xbab8, 0x16e3, 0x8562, 0x329d, 0xbe46, 0xac31, 0xf9eb,
    0x7441, 0x064c, 0x2a76, 0xdd4e, 0x94be, 0xfff1, 0x0861, 0xe939, 0xa628, 0x4abc, 0x141e, 0x5a89, 0x2190, 0x80ed, 0xe835, 0xbb2f,
    0x907f, 0x7a1c, 0xb573, 0x2241, 0x6221, 0x00ad, 0xadad, 0x747c, 0x3b71, 0xcbf9, 0x4588, 0xdf43, 0xbba5, 0x1af5, 0x5f00, 0xfd3e,
    0xe5b8, 0xebdd, 0x60da, 0xd940, 0xde9c, 0x7571, 0x2777, 0x0130, 0x213b, 0x2b46, 0xfc75, 0xbff8, 0x0384, 0xb799, 0xeabd, 0x11b1,
    0xa001, 0x05af, 0xfa88, 0x243f, 0x7a65, 0xcc0a, 0xc14a, 0x5c75, 0xbb56, 0xe906, 0x9917, 0x8b27, 0x99ba, 0x268a, 0xedc6, 0x1dfb,
    0x263f, 0x5873, 0xf97c, 0xe3d6, 0xe389, 0xbcd6, 0x1eb7, 0x596e, 0xf56a, 0x39b4, 0x2c2a, 0xe728, 0x595b, 0xc05f, 0x586b, 0xe164,
    0x732d, 0x1d11, 0xccd5, 0x1e95, 0x7b4c, 0xf428, 0x6afd, 0x5429, 0x6f52, 0xaea1, 0x4b6d, 0xd4c4, 0x8767, 0x158e, 0xdb12, 0xaed8,
    0x3214, 0x37cf, 0xb933, 0xae75, 0x9fb9, 0x43b3, 0x8242, 0x658c, 0xda31, 0x9cf0, 0x39e7, 0x7f79, 0x8531, 0x61ce, 0xdc5f, 0x94a4,
    0xe5eb, 0xb88e, 0x02c3, 0xe1d5, 0xc29c, 0xb9be, 0x23f8, 0xca93, 0x3ee9, 0x0646, 0x207c, 0x7d0a, 0xd454, 0x17f7, 0x807d, 0x78a5,
    0x2edc, 0x33c8, 0xfa18, 0xb4af, 0xef96, 0x6fbd, 0x414e, 0x5da9, 0x7681, 0xe49a, 0xd8f4, 0x7b23, 0x9b47, 0xf961, 0xfecb, 0x2350,
    0x623b, 0x1ab7, 0x1d42, 0x9f86, 0x7c8c, 0x43d9, 0xe828, 0xa632, 0x50a6, 0xa4f1, 0xb173, 0x666d, 0x08cd, 0x4595, 0xc25e, 0x7b7c,
    0xc418, 0x5b00, 0xb912, 0x8f54, 0xaee5, 0x0f29, 0xd640, 0x21f5, 0xe588, 0xdbed, 0x5127, 0x347b, 0x3e9a, 0x7535, 0x6333, 0x03b4,
    0x87a9, 0xdb40, 0xfc8a, 0x4007, 0x05eb, 0xbecc, 0x26bb, 0xdcf7, 0x3c0c, 0xc1b5, 0xa38a, 0xbd39, 0xe053, 0x5511, 0x4661, 0x05b7,
    0xe290, 0xb4c4, 0x84fd, 0xbc09, 0xc168, 0x7e57, 0xba14, 0xba4f, 0xe114, 0x035d, 0x6e40, 0xadb8, 0x6169, 0x7bf8, 0x409c, 0x9e70,
    0x9b71, 0xcf57, 0xaf0a, 0xf1cd, 0xda3f, 0x92fe, 0xd98b, 0x1557, 0x02cb, 0xe9dd, 0x42cc, 0xec36, 0xfc00, 0xca8d, 0x20f7, 0xf681,
    0xe142, 0x550b, 0x5c7b, 0xb558, 0x096a, 0xf339, 0x0cdd, 0x11a9, 0xb819, 0x9554, 0x0410, 0x543c, 0x7a47, 0xee28, 0xc008, 0x0f3c,
    0xc355, 0x617c, 0x6eed, 0x0015, 0x1515, 0x4089, 0x8b65, 0xdbf8, 0x4432, 0x74f2, 0xb5ff, 0xaecd, 0x2701, 0x7746, 0x3256, 0x758d,
    0xdb8b, 0x3741, 0x37bd, 0xcb41, 0xfd30, 0xebb6, 0x0bb1, 0x0af4, 0x5eba, 0x568f, 0xebe2, 0x5fe5, 0x18db, 0x5338, 0x0972, 0xeb21,
    0x9c26, 0xef31, 0xc81a, 0x9576, 0x2632, 0x557e, 0x290e, 0x962b, 0x4872, 0xf8c6, 0x4867, 0xedd3, 0x08ee, 0x66b6, 0xd316, 0x2284,
    0xa7e4, 0x977b, 0x0929, 0xb07a, 0x7e6f, 0x822c, 0x0be2, 0x59a7, 0x3ca3, 0x6e1a, 0xf7e2, 0x932a, 0x1c54, 0x989b, 0x16a0, 0xc621,
    0x402f, 0x2dc3, 0x1fca, 0x3518, 0x4cf2, 0x3c6a, 0xa7d3, 0xa04c, 0x48e2, 0x6856, 0xdd94, 0x4e64, 0x88ea, 0x676a, 0x1ec1, 0x2f18,
    0xe607, 0x677f, 0x0bd4, 0x6f91, 0x6d62, 0xbc87, 0x4fe6, 0x1b63, 0xd89d, 0x124a, 0x68e7, 0x6c25, 0xeacb, 0x67c7, 0xb36c, 0x5b64,
    0xdd76, 0xac86, 0x4e5c, 0xb0d2, 0xd6c7, 0xa672, 0x10e6, 0xe65d, 0x3d25, 0xf997, 0x083d, 0xb565, 0x3457, 0x12b6, 0x941b, 0x5a54,
    0xfc4d, 0x87c0, 0xb229, 0x0f2a, 0xd543, 0x11eb, 0xfa5b, 0xf7ec, 0x9d24, 0xfc38, 0xf2b5, 0x915a, 0x4e32, 0xdebc, 0x5551, 0x0621,
    0x471b, 0x6ec6, 0x2b3e, 0x840d, 0x4cf9, 0x3761, 0x179d, 0xea17, 0xbb1b, 0xa44b, 0x0bc9, 0x728c, 0xadbb, 0x626a, 0x4be6, 0x5f4f,
    0xb271, 0x5772, 0x0714, 0x6325, 0x15a2, 0xf73e, 0x4ff6, 0x0b73, 0xc836, 0xb95a, 0xc71c, 0x6c19, 0xd6f7, 0x9642, 0x211b, 0x0b66,
    0xdd23, 0xf9d3, 0x4c79, 0xb7e1, 0x92c5, 0xe2b0, 0x94e4, 0xa5ab, 0xfa22, 0x8e95, 0x7e2f, 0xc26c, 0x494e, 0xd5f1, 0xa359, 0x6eea,
    0x0712, 0x6523, 0x759e, 0xc898, 0x17f4, 0x837e, 0x48bb, 0x310f, 0x1fc9, 0x361b, 0x7cec, 0x23b9, 0x8bd2, 0x6c4f, 0x80a1, 0xa479,
    0x39fb, 0x6365, 0x55e2, 0xb592, 0xc3a0, 0x9489, 0xc8c6, 0x49aa, 0x3115, 0x05d3, 0x86f4, 0x9716, 0x6444, 0x03f2, 0xc1ef, 0xf9d0,
    0x4f7a, 0x87ff, 0x8d16, 0xceb1, 0x58e7, 0x6de8, 0x360d, 0x6afa, 0x532e, 0x1f64, 0x9bb6, 0x0890, 0x18c8, 0x402b, 0x29c7, 0x5fe2,
    0x1fdc, 0x230e, 0x3c65, 0xa8dc, 0x502a, 0x287d, 0xf453, 0x1186, 0x9736, 0x4464, 0x22a4, 0x87c4, 0xb62d, 0x4f02, 0xff87, 0x7e17,
    0xfa54, 0xf8e3, 0x6d42, 0x9ca7, 0x6eb0, 0x5d48, 0x9760, 0x1232, 0x109f, 0x9f24, 0xde2e, 0xc7c3, 0xb3c6, 0xf1ce, 0xd93c, 0xa2e0,
    0xc658, 0x3956, 0xcec8, 0x219e, 0x8ee3, 0x0859, 0xd101, 0x1785, 0xf20f, 0x2be0, 0x5ad3, 0x7bca, 0x72ae, 0x8f99, 0x6328, 0x18af,
    0x274c, 0x3a0b, 0xa088, 0x8c26, 0xef8a, 0x73a1, 0x919d, 0x89f5, 0x697e, 0xe4b7, 0xf5d9, 0x8a07, 0xa891, 0x1d67, 0xbaa3, 0x0df8,
    0x2587, 0xd3d6, 0xe244, 0x6010, 0x138a, 0xb92c, 0xb16a, 0x7f74, 0x883c, 0xb1bc, 0xa9a2, 0x3f5f, 0xa1fb, 0xee5e, 0xb67e, 0x1c51,
    0x9d9e, 0x4682, 0xe654, 0x342c, 0x69cd, 0x5704, 0x7162, 0x7048, 0x4b69, 0xd0c0, 0xc74f, 0x3f4a, 0xb4ee, 0xaed7, 0x3d1b, 0xc7a9,
    0xd9ac, 0x3270, 0x53ab, 0x9ae1, 0x4ecc, 0x2042, 0x4334, 0x05c5, 0x90e2, 0xe781, 0xf0f2, 0xf40b, 0x49de, 0x4561, 0x36aa, 0xcd5d,
    0x8716, 0x64ff, 0xb849, 0xc504, 0x5617, 0x737a, 0x4a46, 0xeee4, 0x0cc4, 0x08b0, 0x38e8, 0x617d, 0x6fec, 0x101f, 0x1fa4, 0x5b76,
    0xcf64, 0x9c39, 0xf02e, 0x28d7, 0x5ef9, 0x15cc, 0x9950, 0xcc60, 0xab20, 0x9fcb, 0x31c1, 0xd107, 0x1183, 0x9233, 0x1446, 0x02d1,
    0xf3c7, 0xf223, 0x07cc, 0xbbfd, 0x42ad, 0x8d57, 0x8ff0, 0x0a41, 0xeb0f, 0xb208, 0x2e0b, 0xe41f, 0x5d71, 0xae59, 0xb395, 0xa29d,
    0xbb25, 0x9a75, 0xda58, 0xf599, 0xca47, 0xea3d, 0x9131, 0x2559, 0x0d08, 0xd577, 0x25df, 0x8b8e, 0x3013, 0x12de, 0xfc73, 0xb9fe,
    0x63b8, 0x883f, 0xb2bf, 0x99bc, 0x208c, 0x8dfa, 0x225d, 0x7e3d, 0xd07e, 0x79f1, 0x6b83, 0x3b5c, 0xe6d4, 0xb4ac, 0xec95, 0x5fa3,
    0x5e9d, 0x71a8, 0xba82, 0x2cd9, 0x14db, 0x9f4c, 0xb646, 0x2469, 0x2c33, 0xfe31, 0xd9aa, 0x3476, 0x3397, 0xa547, 0x16ce, 0xa84f,
    0xc3b9, 0x8d90, 0x4837, 0xbd83, 0x5ae9, 0x41f0, 0xe317, 0x2248, 0x6b28, 0x90f7, 0xf294, 0xb07b, 0x7f6e, 0x9226, 0x0153, 0x4258,
    0x78a2, 0x29db, 0x43fe, 0xcf0f, 0xf752, 0x239a, 0xa8f1, 0x7d07, 0xd959, 0xc785, 0xf580, 0xd35e, 0x6acc, 0x6518, 0x4ea5, 0x492b,
    0xb094, 0x9081, 0x84e2, 0xa316, 0x21a5, 0xb5d8, 0x89ea, 0x7661, 0x047a, 0x3e56, 0xb9f9, 0x64bf, 0xf809, 0x87a8, 0xda41, 0xec80,
    0x4ab6, 0x1e14, 0xfacd, 0x617a, 0x68eb, 0x6029, 0x2ab3, 0x188b, 0x0368, 0x5b75, 0xcc67, 0xac27, 0xeffd, 0x04d6, 0x92fa, 0xdd8f,
    0x557f, 0x280f, 0x8621, 0x42c3, 0xe339, 0x0c66, 0xaa12, 0xbcf2, 0x3a93, 0x3810, 0x9985, 0x19b5, 0x2c5d, 0x905f, 0x5a3c, 0x9425,
    0x646a, 0x2ddc, 0x00d5, 0xd5d5, 0x877d, 0x0f94, 0x6bfd, 0x4522, 0x75e9, 0xbfef, 0x1493, 0xd704, 0x74ba, 0xfdb7, 0x6c31, 0xfedf,
    0x3744, 0x32b8, 0x9b63, 0xdd45, 0x9fb5, 0x4fbf, 0x423a, 0x1ac0, 0x6a35, 0x9ce1, 0x28f6, 0x7fd8, 0x2490, 0xd5ca, 0x9862, 0xef59,
    0xa072, 0x76dc, 0xb9c7, 0x5a81, 0x2998, 0x00bd, 0xbdbd, 0x64d7, 0x9061, 0x6402, 0x45b4, 0xe37f, 0x4a20, 0x8882, 0x0f02, 0xfd6b,
    0xb0ed, 0xe9f8, 0x67e9, 0x9d42, 0x9a5e, 0xf173, 0x6481, 0xc637, 0x5639, 0x5d54, 0x8b7c, 0xc2e1, 0xc4c3, 0x80db, 0xde03, 0xeaee,
    0x42e2, 0xc218, 0x3d3a, 0xe688, 0xe8f0, 0x7eea, 0x07a9, 0xde98, 0x7175, 0x675f, 0x2bf4, 0x4ec7, 0x2b49, 0xf37a, 0x4f9e, 0x631b,
    0x2b9c, 0x26af, 0xc8e3, 0x6c8f, 0x4061, 0x638d, 0xbd0a, 0xd360, 0x54f2, 0xb489, 0xc9b0, 0x2ed7, 0x38c3, 0x4a56, 0xfef4, 0x1c6f,
    0xa3a0, 0x9713, 0x6141, 0x53d0, 0xe19a, 0x8dd3, 0x0b74, 0xcf31, 0xc96c, 0xf20b, 0x2fe4, 0x1afb, 0x510e, 0x1d52, 0x8f96, 0x6c27,
    0xe8c9, 0x47d3, 0xa60e, 0x6c9a, 0x5574, 0x2304, 0x366f, 0x0898, 0x10c0, 0xc07b, 0x7c4f, 0x801a, 0x1fc2, 0x3d10, 0xcca2, 0x69e2,
    0x782b, 0xa052, 0x56fc, 0x9891, 0x1caa, 0x6665, 0x00c5, 0xc5c5, 0x97d6, 0xa484, 0xc406, 0x451e, 0x49d5, 0x4e6a, 0x86e4, 0x8706,
    0x74ef, 0xa8e2, 0x6e14, 0xf9ec, 0x7346, 0x767a, 0x1f61, 0x9eb3, 0x58b2, 0x38bd, 0x3428, 0x6dc9, 0x172c, 0x5ba6, 0x1fb4, 0x4b66,
    0xdfcf, 0x3729, 0x5fd5, 0x28eb, 0x62c5, 0xe449, 0x0b27, 0x9c62, 0xab75, 0xca9e, 0x33e4, 0xd634, 0x5581, 0xd6f1, 0x9044, 0x4127,
    0x34c0, 0x8521, 0x71de, 0xccf4, 0x3fb4, 0x4a10, 0xb8b2, 0x3eff, 0x1050, 0x50eb, 0xe9bc, 0x23ad, 0x9fc6, 0x3ccc, 0x0175, 0x647e,
    0x39c8, 0x5056, 0x5401, 0x477a, 0x0fa7, 0x58ce, 0x44c1, 0x8701, 0x73e8, 0xd8d4, 0x5b03, 0xba11, 0xbf4a, 0xb136, 0x2328, 0x1a43,
    0xe9b6, 0x29a7, 0x3f82, 0x7c26, 0xe973, 0xec62, 0xa854, 0xd8a2, 0x2d75, 0xa97c, 0xe181, 0x96c8, 0xab91, 0x2e7a, 0x956e, 0x3e2a,
    0xc585, 0xd796, 0xe628, 0x4850, 0xdae4, 0x4925, 0xbe9a, 0x70ed, 0xeecc, 0x24ec, 0xa9b6, 0x2b4b, 0xf178, 0x6f8a, 0x7679, 0x1c62,
    0xaead, 0x4761, 0x14bc, 0xf82b, 0xa58a, 0xdb03, 0xbfc9, 0x32b5, 0x966e, 0x0d37, 0xea48, 0xe444, 0x062a, 0x4c10, 0xde88, 0x6165,
    0x77f4, 0x80e4, 0xe13c, 0x2b75, 0xcf46, 0xbe1b, 0xf16c, 0x7b9e, 0x26fa, 0x9db6, 0x6eaa, 0x4752, 0x278f, 0xf9c8, 0x5762, 0x1704,
    0x738e, 0xbeb2, 0x58c5, 0x4fca, 0x374f, 0x39b3, 0x2b2d, 0x971e, 0x6c4c, 0x83a2, 0x9467, 0x2628, 0x4f64, 0x99e1, 0x7dd1, 0x0f8f,
    0x70e6, 0xe5c7, 0x94a2, 0xe3ed, 0xd8b2, 0x3d65, 0xb9d7, 0x4a91, 0x3933, 0xabad, 0x1246, 0x64eb, 0xac5d, 0x9587, 0xd7c3, 0xb37d,
    0x4a75, 0xddd7, 0x0d27, 0xfa58, 0xf4ef, 0xad3a, 0xe3eb, 0xdeb4, 0x5d59, 0x8671, 0x1293, 0xb13e, 0x2b20, 0x9a13, 0xbc3e, 0xf65f,
    0x3f9c, 0x6238, 0x19b4, 0x2d5c, 0x8055, 0x508d, 0x8fda, 0x206b, 0x6a1d, 0xb4c9, 0x89f0, 0x6c7b, 0xb495, 0xd5ac, 0xfe04, 0xec9f,
    0x55a9, 0xfed9, 0x3142, 0x5284, 0xa4c5, 0x8547, 0x17b8, 0xcf32, 0xca6f, 0xc215, 0x3037, 0x36fa, 0x9d0d, 0xd511, 0x43b9, 0x8848,
    0xc5c8, 0x9adb, 0x74f6, 0xb1fb, 0xeee5, 0x0dc5, 0x18ba, 0x3259, 0x7a82, 0x2bed, 0x57de, 0xabb8, 0x0753, 0x2462, 0x2738, 0x4e7f,
    0x93f1, 0xc78f, 0xff8a, 0x731a, 0x2a26, 0x8d1e, 0xc6b9, 0xd8b7, 0x3860, 0xe9f5, 0x6ae4, 0x4d30, 0xefa3, 0x5a88, 0x2091, 0x90e7,
    0xe284, 0xa0d0, 0xd47e, 0x3ddd, 0x016f, 0x7e64, 0x8927, 0xbbac, 0x13fc, 0xcf5a, 0xa207, 0x21bf, 0xafc2, 0x3905, 0x9d9b, 0x4387,
    0xb676, 0x1459, 0x1dce, 0x130a, 0x39ac, 0x3432, 0x77d3, 0xa7c3, 0xb05c, 0x5849, 0xc346, 0x726f, 0x4e58, 0xb4d6, 0x96ef, 0x8cb6,
    0x7f1a, 0xe652, 0x322a, 0x09f1, 0x68a2, 0x2960, 0xf845, 0xcbe4, 0x5895, 0x1f9a, 0x6548, 0x1ef5, 0x1b2c, 0x97d2, 0xa080, 0x842e,
    0x6fda, 0x2629, 0x4e65, 0x89eb, 0x7760, 0x1470, 0x34e7, 0xa206, 0x20be, 0xbfc8, 0x33b4, 0x8664, 0x0786, 0xf1b7, 0xa045, 0x41eb,
    0xf80c, 0x82ad, 0x8a63, 0xccf5, 0x3eb5, 0x5a1a, 0xb203, 0x2500, 0x5451, 0x172a, 0x5da0, 0x7f88, 0x74c0, 0x87cd, 0xbf24, 0xdf58,
    0xa0be, 0xba10, 0xbe4b, 0xa13c, 0x2999, 0x01bc, 0xadb7, 0x6e66, 0x8b9e, 0x2003, 0x0275, 0x5763, 0x1605, 0x6384, 0xb403, 0x433a,
    0x0bcb, 0x708e, 0x8daf, 0x7708, 0x7c18, 0xd74d, 0x3df3, 0x2f41, 0xbf5e, 0xa522, 0x73ab, 0x9b97, 0x29b1, 0x2994, 0x0cb1, 0x7dc5,
    0x1b9b, 0x2065, 0x6413, 0x54a5, 0xe3de, 0xeb81, 0x3c86, 0x4b3f, 0x8696, 0xf574, 0x27aa, 0xdced, 0x2616, 0x715a, 0x4870, 0xfac4,
    0x6873, 0xf8b1, 0x3f10, 0xeeb4, 0x5c94, 0x5ab7, 0x1fae, 0x517c, 0x6f20, 0xdcd3, 0x1828, 0xa0cb, 0xcf65, 0x9d38, 0xe024, 0x2266,
    0x4506, 0x51cd, 0xde91, 0x787c, 0xf705, 0x74cd, 0x8ac0, 0x6f56, 0xaaa5, 0x0b45, 0xfe00, 0xe89b, 0x1581, 0xd41d, 0x5ebe, 0x528b,
    0xabca, 0x7521, 0x7727, 0x5337, 0x067d, 0x1b47, 0xfcb9, 0x7334, 0x0408, 0x4c24, 0xeabc, 0x10b0, 0xb00b, 0x0f1e, 0xe177, 0x603e,
    0x3da4, 0x7816, 0x9d6f, 0xb773, 0x0057, 0x5757, 0x2231, 0x1251, 0x73fc, 0xccc0, 0x0b80, 0x3bc5, 0x7f4d, 0xb105, 0x101b, 0x1ba0,
    0x1b5e, 0xe5a0, 0xf3c5, 0xf021, 0x27d8, 0xae9f, 0x7553, 0x0555, 0x0072, 0x7272, 0x5345, 0x740f, 0x4802, 0x88b6, 0x3b36, 0x8cbe,
    0x7712, 0x6602, 0x67a2, 0xd609, 0x68bc, 0x377e, 0x0882, 0x0ada, 0x7094, 0x97b5, 0xc7e7, 0x97e2, 0x90b0, 0xb5d3, 0x82e1, 0xc62f,
    0x4e21, 0xcdaf, 0x75e4, 0xb2e2, 0xc4e1, 0xa2f9, 0xdf41, 0xb9a7, 0x3ae1, 0x4a62, 0xcac0, 0x6dba, 0x645f, 0x18e9, 0x610a, 0x189b,
    0x1378, 0x4bde, 0x6777, 0x03dc, 0xefc1, 0x38ea, 0x637f, 0x4ff8, 0x057d, 0x285a, 0xd374, 0x40e6, 0xe40a, 0x4864, 0xeed0, 0x38f0,
    0x7965, 0xff17, 0xee87, 0x6fa7, 0x5b54, 0xed46, 0x9d7b, 0xa367, 0x50d4, 0xd683, 0xe236, 0x1262, 0x40cf, 0xcd23, 0xf968, 0xf7c2,
    0xb30a, 0x3d02, 0xdeb0, 0x595d, 0xc659, 0x3857, 0xdec2, 0x2b2f, 0x951c, 0x4c58, 0x96c0, 0xa399, 0xae2a, 0xc0e6, 0xe1d2, 0xc59b,
    0xc988, 0x16ef, 0x896e, 0xf2e5, 0xc10a, 0x1c35, 0xf9fa, 0x6550, 0x06ed, 0x8bd7, 0x694a, 0xd083, 0x840c, 0x4df8, 0x276b, 0x1d2c,
    0xf1e8, 0xff1a, 0xe38a, 0xbfd5, 0x2ea9, 0x46bd, 0xd96b, 0xf5b7, 0xe469, 0x2b07, 0xbd34, 0xed5e, 0x8563, 0x339c, 0xae4c, 0xa680,
    0xe214, 0x3040, 0x418d, 0x9e6a, 0x816b, 0x7fb8, 0x44f0, 0xb630, 0x521f, 0x3f5e, 0xa0fa, 0xfe54, 0xbccf, 0x07ae, 0xd99f, 0x0143,
    0x5248, 0x6809, 0x82cb, 0xec05, 0xcf33, 0xcb6e, 0xd21f, 0x3a86, 0x2d05, 0xd90c, 0x92d0, 0xf7a5, 0xd46d, 0x2ece, 0x21da, 0xcaa7,
    0x0add, 0x7793, 0xe783, 0xf2f0, 0xd41f, 0x5cbc, 0x729f, 0xbea8, 0x42df, 0xff25, 0xdcb5, 0x7e4e, 0xa30d, 0x3abe, 0x153d, 0x68a1,
    0x2a63, 0xc85b, 0xd437, 0x7494, 0xd399, 0xad0b, 0xd2da, 0xff43, 0xbad3, 0x7d88, 0x56d6, 0xb2bb, 0x9db8, 0x60a4, 0xa73e, 0x4da1,
    0x7e32, 0xdf71, 0x8997, 0x0b1c, 0xa759, 0x2ac6, 0x6dfe, 0x201b, 0x1a6d, 0xc798, 0xe89d, 0x1387, 0xb421, 0x6118, 0x0a89, 0x23c7,
    0xf5ac, 0xff72, 0x8be2, 0x5c7f, 0xb15c, 0x4942, 0xd9fd, 0x6321, 0x11a6, 0xb716, 0x6532, 0x648f, 0xc839, 0xb655, 0x377a, 0x0c86,
    0x4af2, 0x5a50, 0xf849, 0xc7e8, 0x98ed, 0x60d6, 0xd54c, 0x1ee4, 0x0a3d, 0x9773, 0x0121, 0x302a, 0x2be7, 0x5dd4, 0x0bfc, 0x47b9,
    0xcc64, 0xaf24, 0xdfe3, 0x1b05, 0xbefb, 0x118c, 0x9d3c, 0xe420, 0x624e, 0x6fc2, 0x3e31, 0xde9e, 0x7773, 0x0763, 0x1452, 0x16c5,
    0xa344, 0x73f7, 0xc7cb, 0xbbce, 0x719e, 0x8cb4, 0x7d18, 0xc646, 0x2748, 0x3e0f, 0xe0a0, 0xa6e2, 0x8076, 0x73ae, 0x9e92, 0x7993,
    0x09e1, 0x78b2, 0x39cb, 0x5355, 0x641f, 0x58a9, 0x23a6, 0x94cd, 0x8c82, 0x4b2e, 0x9787, 0xf5d5, 0x860b, 0x68e9, 0x622b, 0x0aa7,
    0x0de9, 0x3496, 0xd377, 0x43e5, 0xd414, 0x57b7, 0xc2d1, 0xf4f3, 0xb126, 0x3338, 0x0ae8, 0x42a6, 0x865c, 0x3fbe, 0x401a, 0x18f6,
    0x7e15, 0xf856, 0xd8f7, 0x7820, 0xab59, 0xe6b2, 0xd2ca, 0xef53, 0xaa78, 0xd698, 0xf92d, 0xb287, 0xa184, 0x9121, 0x3549, 0x1da3,
    0x7e67, 0x8a24, 0x8bb2, 0x0c2f, 0xe35b, 0x6e04, 0xe9fc, 0x63ed, 0xdd6a, 0xb09a, 0x9e8f, 0x648e, 0xc938, 0xa65f, 0x3dcb, 0x1779,
    0x0ef3, 0x1d91, 0x4c55, 0x9bcd, 0x73eb, 0xdbd7, 0x6b1d, 0xa5c2, 0x934b, 0x7d35, 0xeb6b, 0xd66c, 0x0dd9, 0x04a6, 0xe28a, 0xaede,
    0x3412, 0x57f3, 0x8695, 0xf677, 0x17b4, 0xc33e, 0x0a17, 0xbd59, 0x8033, 0x36eb, 0x8c1c, 0xd5b0, 0xe218, 0x3c4c, 0x81f5, 0xe126,
    0x316f, 0x7fa9, 0x55e1, 0xb691, 0xf3be, 0x8b5a, 0xe4c7, 0x85a9, 0xf956, 0xc9fc, 0x629b, 0xba17, 0xb94c, 0xd10a, 0x1c8e, 0x4241,
    0x61bb, 0xa92a, 0xb7d7, 0xa4f3, 0xb371, 0x4679, 0x1daf, 0x726b, 0x4a5c, 0xf4fe, 0xbc2b, 0xe34a, 0x7f15, 0xe95d, 0xc24c, 0x696e,
    0xf4a7, 0xe572, 0x2117, 0x076a, 0x1d5b, 0x869f, 0xfc7d, 0xb7f0, 0x83d4, 0xe211, 0x3545, 0x11af, 0xbe1f, 0xf568, 0x3bb6, 0x0c3e,
    0xf24a, 0x6ea5, 0x485d, 0xd7e9, 0x9957, 0xcb67, 0xdb16, 0xaadc, 0x723c, 0x1d0b, 0xd6cf, 0xae7a, 0x90b6, 0xb3d5, 0xe2dd, 0xf989,
    0x1623, 0x45a2, 0xf569, 0x3ab7, 0x1c34, 0xf8fb, 0x755a, 0x0c5c, 0x9028, 0x2d4b, 0x9742, 0x3010, 0x11dd, 0xcc6d, 0xa62d, 0x4fb9,
    0x443c, 0x7afc, 0x5593, 0xc4e3, 0xa0fb, 0xff55, 0xacc5, 0x0d1f, 0xc260, 0x4542, 0x1589, 0xdc15, 0xdeee, 0x0703, 0x7432, 0x753f,
    0x6939, 0xa3f0, 0xc743, 0x3346, 0x7496, 0xd19b, 0x8d1f, 0xc7b8, 0xc8bd, 0x32d1, 0xf20a, 0x2ee5, 0x0af1, 0x5bbf, 0x06ad, 0xcb97,
    0x2be6, 0x5cd5, 0x1bf6, 0x4d08, 0xd79b, 0xeb25, 0x9822, 0xaf19, 0xe2de, 0xfa8a, 0x263d, 0x5a71, 0xd968, 0xf6b4, 0xd477, 0x34d4,
    0x9135, 0x215d, 0x4d20, 0xffb3, 0x4a23, 0x8b81, 0x3f1c, 0xe2b8, 0x9cec, 0x25fb, 0xafaa, 0x516d, 0x7e31, 0xdc72, 0xb989, 0x14cf,
    0x8b58, 0xe6c5, 0xa5bd, 0xec34, 0xfe02, 0xea99, 0x3595, 0xc17f, 0x6940, 0xda89, 0x2448, 0x0d12, 0xcf6d, 0x9530, 0x6074, 0x77ee,
    0x9afe, 0x51d3, 0xc08f, 0x88bb, 0x363b, 0x5ccc, 0x02ef, 0xcdf9, 0x23b2, 0x80d9, 0xdc01, 0xcafa, 0x5780, 0xf5e6, 0xb538, 0x690a,
    0x90c3, 0xc6a0, 0xc1ae, 0xb891, 0x1ddc, 0x0118, 0x0913, 0x8a40, 0xefd6, 0x2ffd, 0x03e2, 0xd1ff, 0xe97b, 0xe46a, 0x2804, 0x8d2a,
    0xf28d, 0xa962, 0xff9f, 0x660f, 0x6aaf, 0x067b, 0x1d41, 0x9c85, 0x4c92, 0x5c0a, 0xc429, 0x6a31, 0x98e5, 0x68de, 0x551c, 0x4b6c,
    0xd5c5, 0x976d, 0x1f3f, 0xc0ed, 0xead9, 0x75d5, 0x83d3, 0xe516, 0x4573, 0x24b8, 0xfde2, 0x3964, 0xfcfa, 0x3077, 0x76ba, 0xdfa1,
    0x5947, 0xdc43, 0x88b8, 0x3538, 0x6cd2, 0x1d3c, 0xe1f8, 0xefb1, 0x489a, 0x102e, 0x2e95, 0x7a81, 0x28ee, 0x67c0, 0xb46b, 0x2b52,
    0xe861, 0xef7b, 0x8250, 0x779e, 0xea8e, 0x2282, 0xa1e2, 0xf747, 0x368f, 0xe878, 0xf662, 0x02a1, 0x83b7, 0x8172, 0x66a1, 0xc401,
    0x4219, 0x39e3, 0x7b7d, 0xc519, 0x4b0a, 0xb3a3, 0x94ab, 0xeae4, 0x48e8, 0x625c, 0x7dd0, 0x0e8e, 0x60ec, 0xef76, 0x8f5d, 0xa7ec,
    0x9f73, 0x8979, 0xe5f2, 0xa197, 0x8232, 0x15fc, 0xa960, 0xfd9d, 0x461b, 0x7fcd, 0x3185, 0x9543, 0x1307, 0x34a1, 0xe440, 0x022e,
    0x0c38, 0xf44c, 0x0e99, 0x77fb, 0x8feb, 0x115a, 0x4bea, 0x5343, 0x7209, 0x283e, 0xb710, 0x6334, 0x04b3, 0xf79f, 0xee57, 0xbf77,
    0x8c0b, 0xc2a7, 0x8285, 0xa24b, 0x6df3, 0x2d16, 0xca1f, 0xb265, 0x4366, 0x5797, 0xe2f1, 0xd5a5, 0xf70d, 0x7cc5, 0x0a90, 0x3ade,
    0x755d, 0x0b5b, 0xe01e, 0x185c, 0xd4bf, 0xfc1c, 0xd691, 0xf024, 0x22dd, 0xfebd, 0x5526, 0x7156, 0x447c, 0x3abc, 0x173f, 0x48b5,
    0x3f01, 0xffa5, 0x5c35, 0xfb16, 0xabaa, 0x1541, 0x14dd, 0x994a, 0xd67a, 0x1bcf, 0x7431, 0x763c, 0x5927, 0xbc23, 0xeb42, 0xff45,
    0xbcd5, 0x1db4, 0x6970, 0xeab9, 0x15b5, 0xe029, 0x2f6b, 0x9574, 0x2430, 0x756a, 0x3c6c, 0xa1d5, 0xc070, 0x7744, 0x3054, 0x5599,
    0xcee9, 0x00bf, 0xbfbf, 0x44c3, 0x8503, 0x53fc, 0xcdb6, 0x6cfd, 0x3213, 0x30c8, 0xc905, 0x9b62, 0xdc44, 0x8fbf, 0x450e, 0x59c5,
    0x5ec1, 0x2df4, 0x28fd, 0x74d3, 0x94de, 0x9f91, 0x6b9b, 0x2344, 0x762f, 0x4a34, 0x9c96, 0x5f81, 0x7cbf, 0x70ea, 0xe9cb, 0x54da,
    0x9ca1, 0x68b6, 0x3d74, 0xa8c6, 0x4a30, 0x9892, 0x1fa9, 0x567b, 0x1f16, 0xe9c4, 0x5bd5, 0x6cc7, 0x0829, 0xa171, 0x64d4, 0x9362,
    0x541c, 0x5a67, 0xcf7e, 0x8623, 0x40c1, 0xc32d, 0x1904, 0x9dec, 0x34f0, 0xb511, 0x4023, 0x21cf, 0xdfb2, 0x4a54, 0xfcf6, 0x3c7b,
    0xb6c2, 0xa0ed, 0xe943, 0xdc52, 0x99a9, 0x3599, 0xcd73, 0xa938, 0xa5c5, 0x944c, 0x0d03, 0xde7c, 0x9591, 0xc1d5, 0xc3ea, 0xdec3,
    0x2a2e, 0x8516, 0x46e9, 0x8d3f, 0xe798, 0xe9eb, 0x74fa, 0xbdf7, 0x2e9d, 0x7289, 0xa8be, 0x3248, 0x6b93, 0x2b4c, 0xf67f, 0x1fbc,
    0x436e, 0x5f9f, 0x62a1, 0x802d, 0x28f5, 0x7cdb, 0x148e, 0xca19, 0xb463, 0x235a, 0x6831, 0xbaf3, 0x5da8, 0x7780, 0xf490, 0xd245,
    0x60dc, 0xdf46, 0xbea0, 0x4ad7, 0x7f75, 0x893d, 0xa1b6, 0xa313, 0x24a0, 0xe5fa, 0xa99f, 0x0262, 0x4074, 0x7698, 0xfd83, 0x5805,
    0x8f0a, 0xf0bb, 0xbd42, 0x9b28, 0x960e, 0x6d57, 0x89b2, 0x2e39, 0xd62d, 0x4c98, 0x5600, 0x646d, 0x2adb, 0x70e3, 0xe0c2, 0xc480,
    0xc398, 0xacb1, 0x796b, 0xf119, 0x0eeb, 0x0589, 0xdcae, 0x6555, 0x03e8, 0xdbf5, 0x493f, 0xa480, 0xc002, 0x0536, 0x6311, 0x2196,
    0x86eb, 0x8809, 0x8489, 0xc87d, 0xf211, 0x35fe, 0xaa14, 0xbaf4, 0x5aaf, 0x07b6, 0xc187, 0x91b8, 0xacd0, 0x180a, 0x82e9, 0xce27,
    0xce71, 0x9827, 0xaa1c, 0xb2fc, 0xdaff, 0x523e, 0x1e7f, 0x91a6, 0xb2ce, 0xe8cd, 0x43d7, 0xe626, 0x465e, 0x3a88, 0x230b, 0x3960,
    0xf8fe, 0x705f, 0x5c7e, 0xb05d, 0x5948, 0xd34c, 0x78de, 0x55a7, 0xf0d7, 0xd12e, 0x38aa, 0x233f, 0x0d54, 0x892b, 0xb7a0, 0xd384,
    0xb016, 0x1203, 0x21ae, 0xbed3, 0x39a4, 0x3c3a, 0xf783, 0xf24b, 0x6fa4, 0x5857, 0xdd58, 0x82a8, 0x8f66, 0x9cd7, 0x1ec0, 0x2e19,
    0xf60d, 0x6dce, 0x102b, 0x2b90, 0x2aa3, 0x089b, 0x13c3, 0xf065, 0x639c, 0xac1b, 0xd3c1, 0xf553, 0x008d, 0x8d8d, 0x552a, 0x7d5a,
    0x8404, 0x45f0, 0xa73b, 0x48a4, 0x2e10, 0xff04, 0xfd94, 0x4f12, 0xef97, 0x6ebc, 0x5144, 0x5718, 0x6d7e, 0xa09b, 0x9f35, 0xcf3f,
    0xc762, 0x1267, 0x45ca, 0x9d01, 0xd91d, 0x83c1, 0xf704, 0x75cc, 0x9aca, 0x65e7, 0xb15a, 0x4f44, 0xb9c1, 0x5c87, 0x49a4, 0x3f1b,
    0xe5bf, 0xecda, 0x10ec, 0xec57, 0x9d61, 0xb97d, 0xe03b, 0x3d79, 0xa5cb, 0x9a42, 0xed6f, 0xb452, 0x126b, 0x49c6, 0x5d79, 0xa651,
    0x33c5, 0xf715, 0x64dd, 0x9a6b, 0xc446, 0x055e, 0x0b79, 0xc23c, 0x191e, 0x87f6, 0x841f, 0x5eeb, 0x07de, 0xa9ef, 0x7212, 0x3325,
    0x17f5, 0x827f, 0x58b1, 0x3bbe, 0x0436, 0x721a, 0x3b2d, 0x97a5, 0xd7f7, 0x8749, 0x3ba0, 0x1a28, 0x82dd, 0xfa13, 0xbfa4, 0x5fd8,
    0x25e6, 0xb2b7, 0x91b4, 0xa0dc, 0xd872, 0xfda5, 0x7e23, 0xce60, 0x8936, 0xaabd, 0x135d, 0x6efb, 0x1603, 0x6582, 0xd43f, 0x7c9c,
    0x53c9, 0xf883, 0x0d22, 0xff5d, 0xa4cd, 0x8d4f, 0x97e8, 0x9aba, 0x1597, 0xc20b, 0x2e29, 0xc63d, 0x5c33, 0xfd10, 0xcb96, 0x2ae7,
    0x4cdf, 0x1147, 0x56f7, 0x939a, 0xace4, 0x2c3e, 0xf33c, 0x09d8, 0x418b, 0x986c, 0xe157, 0x401e, 0x1cf2, 0x3e3d, 0xd292, 0xb70b,
    0x782f, 0xa456, 0x16d4, 0xb255, 0x7356, 0x666a, 0x0fca, 0x35a3, 0xf749, 0x3881, 0x0814, 0x9c4c, 0x855b, 0x0ba4, 0x1fe1, 0x1e33,
    0xddea, 0x301a, 0x1bd7, 0x6c29, 0xe6c7, 0xa7bf, 0xcc20, 0xeb60, 0xdd67, 0xbd97, 0x4efd, 0x1173, 0x62c3, 0xe24f, 0x6b1b, 0xa3c4,
    0xf377, 0x4293, 0xb369, 0x5e61, 0x8d54, 0x8cf3, 0x3a5f, 0xf4dc, 0x9e09, 0xe208, 0x2c5c, 0x915e, 0x4a36, 0x9e94, 0x7f95, 0x69dd,
    0x4714, 0x61c9, 0xdb58, 0xe492, 0xd0fc, 0xfb73, 0xcecf, 0x2699, 0xfed5, 0x3d4e, 0x92fc, 0xdb89, 0x3543, 0x17a9, 0xde23, 0xcace,
    0x63b4, 0x8433, 0x72c7, 0xe6f0, 0x9088, 0x8deb, 0x334c, 0x7e9c, 0x71df, 0xcdf5, 0x2fbe, 0x40a1, 0xa34d, 0x7afe, 0x5791, 0xe4f7,
    0xb599, 0xc8ab, 0x24c7, 0x829d, 0xba53, 0xfd08, 0xd38e, 0xba1c, 0xb247, 0x6144, 0x56d5, 0xb1b8, 0xada6, 0x7f77, 0x8b3f, 0x81a2,
    0xb671, 0x135e, 0x6df8, 0x261d, 0x7a51, 0xf83e, 0xb09f, 0x9b8a, 0x34ac, 0xe94d, 0xd25c, 0x79c5, 0x5fb7, 0x4a89, 0x212b, 0x3b56,
    0xecde, 0x14e8, 0xac7f, 0xb7a5, 0xd681, 0xe034, 0x3276, 0x55ad, 0xfadd, 0x716a, 0x7840, 0xcb39, 0x8548, 0x18b7, 0x3f54, 0xaaf0,
    0x5e10, 0xfc25, 0xefa8, 0x5183, 0x90df, 0xdabc, 0x117d, 0x6ccd, 0x0223, 0x0135, 0x243e, 0x7b64, 0xdc00, 0xcbfb, 0x478a, 0xff57,
    0xaec7, 0x2d0b, 0xd702, 0x72bc, 0x9d8b, 0x5397, 0xa6dd, 0xbf49, 0xb235, 0x1336, 0x0590, 0xc5b7, 0xe5a4, 0xf7c1, 0xb009, 0x0d1c,
    0xc163, 0x755c, 0x0a5a, 0xf014, 0x12ed, 0xcf40, 0xb81d, 0x9150, 0x4438, 0x7ef8, 0x15bb, 0xee27, 0xcf07, 0xff5a, 0xa3ca, 0xfd79,
    0xa2ff, 0xd947, 0xd99b, 0x0547, 0x1260, 0x42cd, 0xed37, 0xec0a, 0xc03c, 0x3b08, 0xb280, 0xa683, 0xe117, 0x005e, 0x5e5e, 0xb26b,
    0x4d68, 0xb7fb, 0x88df, 0x525f, 0x7f1e, 0xe256, 0x7202, 0x2335, 0x075e, 0x296f, 0xf74a, 0x3b82, 0x380a, 0x839f, 0xa95a, 0xc7a7,
    0xd7a2, 0xd21c, 0x3985, 0x1d1b, 0xc6df, 0xbed1, 0x3ba6, 0x1c2e, 0xe2e1, 0xc5b5, 0xe7a6, 0xd7d5, 0xa56b, 0x3ae2, 0x4961, 0xfade,
    0x7269, 0x485e, 0xd4ea, 0xa949, 0xd4b4, 0xf717, 0x66df, 0xba7f, 0xd124, 0x32a0, 0x837b, 0x4dbe, 0x612d, 0x3fbc, 0x4218, 0x38e2,
    0x6b77, 0xcfa8, 0x50f5, 0xf7a2, 0xd36a, 0x5ef8, 0x14cd, 0x895a, 0xc6d1, 0xb0df, 0xdbca, 0x7600, 0x651b, 0x4da6, 0x7935, 0xaf47,
    0xbc80, 0x48e1, 0x6b55, 0xed8a, 0x51b7, 0xa4eb, 0xab69, 0xd682, 0xe337, 0x0268, 0x4a7e, 0xd6dc, 0xbd69, 0xb003, 0x0716, 0x6127,
    0x35b6, 0xe25c, 0x7808, 0x8371, 0x47b4, 0xc169, 0x7f56, 0xaa1e, 0xb0fe, 0xfaeb, 0x475c, 0x2981, 0x19a4, 0x3d4c, 0x90fe, 0xfb9d,
    0x2021, 0x2057, 0x5621, 0x454c, 0x1b87, 0x3c79, 0xb4c0, 0x80f9, 0xfc21, 0xebac, 0x11ab, 0xba1b, 0xb540, 0x1172, 0x63c2, 0xf245,
    0x61aa, 0xb83b, 0xb776, 0x0552, 0x0775, 0x0244, 0x6652, 0x37f2, 0x840e, 0x4ffa, 0x077f, 0x084e, 0xc616, 0x7718, 0x6c08, 0xc7e6,
    0x96e3, 0x80ba, 0xbf62, 0x991e, 0x822e, 0x09e0, 0x79b3, 0x29c1, 0x59e4, 0x7fe0, 0x1ca8, 0x6467, 0x20d1, 0xd0a7, 0xa028, 0x2c86,
    0x4b84, 0x3d2d, 0xf19f, 0x886d, 0xe0ed, 0xebaf, 0x12a8, 0x8a05, 0xaa93, 0x3d73, 0xafc1, 0x3a06, 0xad85, 0x5c54, 0x9a77, 0xd85a,
    0xd58d, 0xdf25, 0xddc3, 0x1933, 0xaadb, 0x753b, 0x6d3d, 0xe3d8, 0xed87, 0x5cba, 0x7499, 0xde94, 0x7d79, 0xa727, 0x54b8, 0xfec3,
    0x2b58, 0xe26b, 0x4f3f, 0xc2ba, 0x9f98, 0x6292, 0xb31e, 0x2916, 0x8e33, 0xd889, 0x065e, 0x3864, 0xedf1, 0x2acc, 0x67f4, 0x805f,
    0x5a87, 0x2f9e, 0x6081, 0x821b, 0x3cd5, 0x186c, 0xe48f, 0xcde1, 0x3baa, 0x1022, 0x2299, 0xbaf9, 0x57a2, 0xd7c4, 0xb47a, 0x3a43,
    0xe8c0, 0x4eda, 0x3654, 0x33a3, 0x9173, 0x671b, 0x6fb0, 0x4c43, 0x8ddb, 0x037c, 0x4f61, 0x9ce4, 0x2df3, 0x2ffa, 0x04e5, 0xa1c9,
    0xdc6c, 0xa797, 0xe408, 0x4a66, 0xcec4, 0x2d92, 0x4e9b, 0x7715, 0x6105, 0x1794, 0xe31e, 0x2b41, 0xfb72, 0xcfce, 0x3693, 0xf464,
    0x26b1, 0xd6fd, 0x9c48, 0x815f, 0x4b8c, 0x3525, 0x71cf, 0xdde5, 0x3f15, 0xebb1, 0x0cb6, 0x7ac2, 0x6bad, 0x1572, 0x27ee, 0x98a9,
    0x2492, 0xd7c8, 0xb876, 0xfa3b, 0x978c, 0xfede, 0x3645, 0x22b2, 0x91d2, 0xc6ba, 0xdbb4, 0x087e, 0xf626, 0x46e5, 0x8133, 0x27e0,
    0x96a7, 0xc4fe, 0xbde6, 0x3f8c, 0x7228, 0x091f, 0x864c, 0x2fae, 0x50b1, 0xb3e6, 0xd1ee, 0xf86a, 0xe4cb, 0x89a5, 0x392e, 0xb6b0,
    0xd29f, 0xba06, 0xa85d, 0xd1ab, 0xbd2f, 0xf645, 0x2586, 0xd2d7, 0xf24e, 0x6aa1, 0x0875, 0xfd2d, 0xf6ab, 0xcb68, 0xd419, 0x5aba,
    0x12a3, 0x810e, 0x1add, 0x7728, 0x5c38, 0xf61b, 0x7bd8, 0x60bc, 0xbf26, 0xdd5a, 0x80aa, 0xaf72, 0x89b5, 0x293e, 0xa61b, 0x798f,
    0x15fd, 0xa861, 0xed97, 0x4caa, 0x6432, 0x7584, 0xd282, 0xa71b, 0x6884, 0x0f46, 0xb92f, 0xb269, 0x4f6a, 0x97ef, 0x9dbd, 0x65a1,
    0xf71c, 0x6dd4, 0x0a31, 0x9b7f, 0xc159, 0x4f66, 0x9be3, 0x5dc5, 0x1aed, 0x4718, 0x6dc5, 0x1b20, 0x9bde, 0x60f8, 0xfb62, 0xdfde,
    0x2638, 0x5f74, 0x894a, 0xd6c1, 0xa074, 0x70da, 0xd9fb, 0x6527, 0x719a, 0x88b0, 0x3d30, 0xec82, 0x48b4, 0x3e00, 0xefaf, 0x5684,
    0xe0e9, 0xefab, 0x5280, 0xa0c1, 0xc56f, 0x3d7c, 0xa0ce, 0xca60, 0xcd1a, 0xc051, 0x5665, 0x0108, 0x1903, 0x9aeb, 0x44c6, 0x8006,
    0x03de, 0xedc3, 0x18fe, 0x761d, 0x7806, 0x8d7f, 0xa7d8, 0xab47, 0xf8ac, 0x220d, 0x2e6d, 0x8279, 0x5eb7, 0x5b82, 0x3b90, 0x2a18,
    0xb320, 0x1728, 0x5fa2, 0x5f9c, 0x61a2, 0xb033, 0x3726, 0x50da, 0xd88d, 0x025a, 0x784c, 0xc735, 0x4530, 0x67fb, 0x8f50, 0xaae1,
    0x4f01, 0xfc84, 0x4e09, 0xe587, 0xd4e2, 0xa141, 0x54e4, 0xa29f, 0xb927, 0xba61, 0xcf3a, 0xc267, 0x4245, 0x65bf, 0xe902, 0x9d13,
    0xcb0f, 0xb37e, 0x4976, 0xedc9, 0x12f4, 0xd659, 0x38ec, 0x6579, 0x2fc4, 0x3adb, 0x7058, 0x5b79, 0xc06b, 0x6c5f, 0x90b1, 0xb4d2,
    0x92eb, 0xcc9e, 0x55de, 0x89ae, 0x3225, 0x06fe, 0x98c4, 0x49ff, 0x6440, 0x07f6, 0x81c7, 0xd314, 0x2086, 0x87f0, 0x8219, 0x3ed7,
    0x3878, 0xf1ed, 0xfa1f, 0xb3a8, 0x9fa0, 0x5aaa, 0x02b3, 0x91a5, 0xb1cd, 0xd8d3, 0x5c04, 0xca27, 0x8a5d, 0xf2cb, 0xef24, 0xdd0f,
    0xd5ff, 0xad57, 0x8e86, 0x6d3c, 0xe2d9, 0xfd8d, 0x560b, 0x6f66, 0x9a95, 0x3ab8, 0x133b, 0x089d, 0x15c5, 0x9059, 0x5c3a, 0xf419,
    0x5bcc, 0x75de, 0x88d8, 0x5558, 0x0f28, 0xd741, 0x31ff, 0xef39, 0xc012, 0x1526, 0x73ba, 0x8a86, 0x2910, 0x8835, 0xb8b5, 0x39f8,
    0x6066, 0x65fc, 0xaa41, 0xefa1, 0x588a, 0x0085, 0x8585, 0xd57a, 0x28d2, 0x5bfc, 0x45ee, 0xb925, 0xb863, 0xef2e, 0xd705, 0x75bb,
    0xedbd, 0x6680, 0xe520, 0x7345, 0x7579, 0x2f7f, 0x8160, 0x74b3, 0xf4be, 0xfc6b, 0xa1e6, 0xf343, 0x76a7, 0xc2bc, 0x999e, 0x02ae,
    0x8cb8, 0x7114, 0x063e, 0x5804, 0x8e0b, 0xe0b1, 0xb7f3, 0x80d7, 0xd20f, 0x2a96, 0x3dae, 0x721c, 0x3d2b, 0xf799, 0xe851, 0xdf4b,
    0xb3ad, 0x9aa5, 0x0a88, 0x22c6, 0xe5a6, 0xf5c3, 0x901d, 0x187e, 0xf69d, 0xfd5e, 0x85d8, 0x8827, 0xaaa7, 0x0947, 0xde14, 0xfdf9,
    0x227f, 0x5c1f, 0xd13c, 0x2ab8, 0x1380, 0xb326, 0x112e, 0x3f9e, 0x603a, 0x39a0, 0x383e, 0xb7ab, 0xd88f, 0x0058, 0x5858, 0xd257,
    0x72ce, 0xeff9, 0x00d2, 0xd2d2, 0xf74b, 0x3a83, 0x2800, 0x892e, 0xb2a5, 0x83a6, 0x9063, 0x6600, 0x65a0, 0xf61d, 0x7dde, 0x0080,
    0x8080, 0x8558, 0x08a7, 0x2fff, 0x01e0, 0xf1eb, 0xfc19, 0xd394, 0xa006, 0x02a8, 0x8abe, 0x1128, 0x3998, 0x0006, 0x0606, 0x603c,
    0x3fa6, 0x5802, 0x880d, 0x808d, 0x8855, 0xd8d5, 0x5a02, 0xaa1b, 0xb5fb, 0xaac9, 0x6729, 0x5d82, 0x5daa, 0x7582, 0xd484, 0xc727,
    0x5722, 0x5744, 0x3122, 0x32e4, 0xc73f, 0x4f3a, 0xc7bf, 0xcfba, 0x42e7, 0xc71d, 0x6d18, 0xc6fd, 0x9cf3, 0x3ae4, 0x4f67, 0x9ae2,
    0x4dcf, 0x105c, 0x5ce7, 0x29c4, 0x5ce1, 0x2fc2, 0x3cdd, 0x1064, 0x64df, 0x9869, 0xe452, 0x103c, 0x3c87, 0x4a3e, 0x969c, 0xffc5,
    0x3c55, 0x98ec, 0x61d7, 0xc546, 0x1455, 0x11c2, 0xd372, 0x46e0, 0x8436, 0x77c2, 0xb6d2, 0xb0fd, 0xf9e8, 0x7742, 0x3652, 0x35a5,
    0xf14f, 0x58bd, 0x37b2, 0xc44e, 0x0d56, 0x8b29, 0x97b4, 0xc6e6, 0x87e8, 0x9a01, 0xae2c, 0xc6e0, 0x81ee, 0xfa3d, 0x918a, 0x9ee2,
    0x09e3, 0x7ab0, 0x19df, 0x4637, 0x53e1, 0xd0ab, 0xac24, 0xecfe, 0x34c8, 0x8d29, 0xf18e, 0x997c, 0xe04c, 0x4a0e, 0xa6ac, 0xce38,
    0xd16e, 0x78ea, 0x6193, 0x8102, 0x16d1, 0xb750, 0x2374, 0x461f, 0x7bc9, 0x71ad, 0xbf87, 0x7cfb, 0x34ae, 0xeb4f, 0xf248, 0x6ca7,
    0x6849, 0xc28b, 0xaea9, 0x4365, 0x5494, 0xd2ef, 0xca76, 0xdb0c, 0xb0c6, 0xc2d3, 0xf6f1, 0x9132, 0x265a, 0x3d16, 0xcaa4, 0x09de,
    0x478d, 0xf850, 0xdef1, 0x181c, 0x94ff, 0xbeb0, 0x5ac7, 0x6fde, 0x222d, 0x0e4d, 0xa32f, 0x189c, 0x147f, 0x3be8, 0x5260, 0x4021,
    0x23cd, 0xffa6, 0x5f36, 0xcb08, 0xb479, 0x3940, 0xd8de, 0x5109, 0x1a55, 0xffa0, 0x5930, 0xab34, 0x8bdf, 0x6142, 0x50d3, 0xd184,
    0x9200, 0x2775, 0x0332, 0x012f, 0x3e24, 0xcb8b, 0x37fa, 0x8c06, 0xcfaa, 0x52f7, 0xd7b6, 0xc608, 0x6906, 0x9ccf, 0x06d8, 0xbee2,
    0x0895, 0x1dcd, 0x1009, 0x09b2, 0x2be1, 0x5bd2, 0x6bc0, 0x781f, 0x9466, 0x2729, 0x5f6e, 0x9350, 0x662e, 0x4b8e, 0x3727, 0x51db,
    0xc887, 0x08eb, 0x63b3, 0x8334, 0x02f1, 0xd3e7, 0xd375, 0x41e7, 0xf400, 0x42d5, 0xf52f, 0x7cf1, 0x3ea4, 0x4b0b, 0xb2a2, 0x84a1,
    0xe055, 0x5317, 0x265d, 0x3a11, 0xba92, 0x3cc9, 0x0470, 0x345c, 0x19bd, 0x2455, 0x100f, 0x0fb4, 0x4bdd, 0x6474, 0x33c2, 0xf012,
    0x14eb, 0xaf7c, 0x87bb, 0xc952, 0xcc35, 0xfe75, 0x9dee, 0x36f2, 0x9505, 0x5541, 0x1631, 0x57b0, 0xc5d6, 0x84c5, 0x8431, 0x70c5,
    0xc6e4, 0x85ea, 0xba15, 0xbb4e, 0xf11e, 0x09ec, 0x75bf, 0xe9b9, 0x26a8, 0xcfe4, 0x1cb9, 0x7576, 0x2070, 0x7106, 0x142c, 0x68bb,
    0x3079, 0x78b4, 0x3fcd, 0x3369, 0x5bb9, 0x00ab, 0xabab, 0x1440, 0x04d7, 0x93fb, 0xcd85, 0x5fce, 0x33f0, 0xc220, 0x0502, 0x5725,
    0x5043, 0x4114, 0x07f3, 0x84c2, 0x8336, 0x00f3, 0xf3f3, 0xc617, 0x7619, 0x7c02, 0xcd57, 0x8d1c, 0xc4bb, 0xf8a3, 0x2d02, 0xde0b,
    0xe2e6, 0xc2b2, 0x9790, 0xe2c2, 0xe696, 0xf6ee, 0x8e2d, 0xc697, 0xf699, 0xf95a, 0xc5f0, 0xa2e3, 0xc55b, 0x0948, 0xd11b, 0x0d9f,
    0x42e0, 0xc01a, 0x1d2e, 0xf3ea, 0xdf0e, 0xf6e8, 0x882b, 0xa6ab, 0xc93f, 0xa158, 0x4dfd, 0x226e, 0x4d0e, 0xd19d, 0x8b19, 0xa784,
    0xf71b, 0x6ad3, 0x7a07, 0xae68, 0x82a4, 0x836a, 0x5caf, 0x618c, 0x9e1d, 0xf61c, 0x7cdf, 0x108a, 0x8a31, 0x9ea7, 0x4ca6, 0x683e,
    0xb5fc, 0xadce, 0x171f, 0x6895, 0x1e57, 0xb98e, 0x13c8, 0xfb6e, 0xd3d2, 0xe640, 0x2038, 0x394e, 0xd6d0, 0xb165, 0x707b, 0x785a,
    0xd123, 0x35a7, 0xf34d, 0x78a9, 0x22d0, 0xf3b0, 0x8554, 0x04ab, 0xef87, 0x7eac, 0x41ef, 0xfc08, 0xc285, 0xa0a7, 0xa309, 0x3eba,
    0x5515, 0x4265, 0x459f, 0xc854, 0xdb38, 0x84f2, 0xb306, 0x310e, 0x1ec8, 0x2611, 0x765d, 0x3846, 0xcfd3, 0x2b8e, 0x34bd, 0xf85c,
    0xd2fd, 0xd864, 0xebb3, 0x0eb4, 0x5ad6, 0x7ecf, 0x228c, 0xafec, 0x172b, 0x5ca1, 0x6f82, 0x7e71, 0x9c32, 0xfb25, 0x9899, 0x14a2,
    0xe635, 0x554d, 0x1a3d, 0x97c8, 0xba9a, 0x34c1, 0x8420, 0x61d4, 0xc645, 0x244b, 0x0e11, 0xff73, 0x8ae3, 0x4c75, 0xbbed, 0x52bd,
    0x9dfc, 0x24e0, 0xa5ba, 0xeb33, 0x8e34, 0xdf8e, 0x7668, 0x0d73, 0xae0c, 0xe6c0, 0xa0b8, 0xbc16, 0xde77, 0x9e9a, 0x719b, 0x89b1,
    0x2d3a, 0xe633, 0x534b, 0x7a01, 0xa86e, 0xe298, 0xbccc, 0x04ad, 0xe981, 0x1e90, 0x7e49, 0xa40a, 0x4a88, 0x202a, 0x2b5c, 0xe66f,
    0x0f17, 0xe87e, 0xf064, 0x629d, 0xbc11, 0xd970, 0xeeac, 0x448c, 0xca4c, 0xe136, 0x217f, 0x6f02, 0xfef1, 0x196a, 0xf382, 0xb766,
    0x1542, 0x17de, 0xa954, 0xc9a9, 0x37ce, 0xb832, 0xbe7f, 0x9508, 0x584c, 0xc643, 0x224d, 0x6e2d, 0xc0d5, 0xd2e1, 0xc478, 0x3b60,
    0xdae8, 0x4529, 0x7ee2, 0x0fa1, 0x5ec8, 0x24fd, 0xb8a7, 0x2bea, 0x50d9, 0xdb8e, 0x3244, 0x679f, 0xeb34, 0x8933, 0xafb8, 0x437f,
    0x4e8e, 0x6200, 0x218c, 0x9cf1, 0x38e6, 0x6f73, 0x8f80, 0x7a31, 0x985e, 0xd365, 0x51f7, 0xe4ab, 0xe9c5, 0x5ad4, 0x7ccd, 0x0298,
    0xba8e, 0x20d5, 0xd4a3, 0xe000, 0x0642, 0x2478, 0x3d22, 0xfe90, 0x780b, 0x8072, 0x77aa, 0xdeba, 0x5357, 0x661d, 0x78bd, 0x36c4,
    0xa333, 0x0480, 0xc4ac, 0xefb4, 0x4d9f, 0x400c, 0x0ee0, 0x0e82, 0x6ce0, 0x2f0e, 0xf011, 0x17e8, 0x9f62, 0x9868, 0xe553, 0x0036,
    0x3636, 0x51c1, 0xd29d, 0xb804, 0x8849, 0xc4c9, 0x8ad1, 0x7e47, 0xaa04, 0xaae4, 0x4a04, 0xaca6, 0x6e7c, 0x9184, 0x90ec, 0xe98f,
    0x109e, 0x9e25, 0xce24, 0xcd72, 0xa839, 0xb5cf, 0x9efd, 0x16fc, 0x9a7d, 0xd250, 0x75c9, 0x9fcf, 0x35c5, 0x912f, 0x3b47, 0xfdcf,
    0x1449, 0x0dde, 0x03a1, 0x92bc, 0x9bc9, 0x77ef, 0x9bff, 0x41d9, 0xca3e, 0x9344, 0x723a, 0x1b0d, 0xb6f3, 0x91dc, 0xc8b4, 0x3bd8,
    0x6250, 0x71dc, 0xcef6, 0x1fa0, 0x5f72, 0x8f4c, 0xb6fd, 0x9fd2, 0x28d8, 0x51f6, 0xe5aa, 0xf9cf, 0x5065, 0x6732, 0x4699, 0xfd4f,
    0x94c9, 0x8886, 0x0b06, 0xbd43, 0x9a29, 0x8604, 0x67e6, 0x924d, 0x6a38, 0x91ec, 0xf884, 0x0a25, 0x8f6b, 0x91da, 0xceb2, 0x5be4,
    0x5df6, 0x29de, 0x46fb, 0x9f2d, 0xd727, 0x5799, 0xecff, 0x35c9, 0x9d23, 0xfb3f, 0x8283, 0xa44d, 0x0dcf, 0x12b0, 0x921d, 0x3a68,
    0xc3eb, 0xdfc2, 0x3a24, 0x8fa7, 0x5d16, 0xc93e, 0xa059, 0x5df7, 0x28df, 0x56f1, 0x959c, 0xccd8, 0x1398, 0xab3e, 0x81d5, 0xc106,
    0x1039, 0x3982, 0x1a1c, 0xb6e9, 0x8bc6, 0x785b, 0xd022, 0x25ad, 0xf9fc, 0x6356, 0x66d1, 0xb471, 0x3148, 0x588e, 0x0481, 0xc5ad,
    0xffbe, 0x472e, 0x5bf3, 0x4ae1, 0x4943, 0xd8fc, 0x732b, 0x1b17, 0xace9, 0x2133, 0x234e, 0x7c25, 0xea70, 0xdc7c, 0xb787, 0xf4a3,
    0xe176, 0x613f, 0x2dae, 0x72a7, 0x8690, 0xf372, 0x4796, 0xe34b, 0x7e14, 0xf957, 0xc8fd, 0x7291, 0xb0a6, 0xa2b3, 0x950b, 0x5b4f,
    0xf65d, 0x3d9e, 0x422c, 0x0cd6, 0x1aa2, 0x0857, 0xdf0f, 0xf7e9, 0x9821, 0xac1a, 0xd2c0, 0xe559, 0x0a3c, 0x9672, 0x112b, 0x3a9b,
    0x3018, 0x19d5, 0x4c3d, 0xf3a5, 0x9041, 0x4422, 0x64e2, 0xa554, 0x05dd, 0x88fa, 0x777a, 0x0e6a, 0x8408, 0x49fc, 0x6743, 0x37e8,
    0x9e14, 0xff15, 0xec85, 0x4fb3, 0x4e36, 0xdab8, 0x1579, 0x2ce5, 0x28e7, 0x6ec9, 0x2431, 0x746b, 0x2c66, 0xab64, 0xdb8f, 0x3345,
    0x7795, 0xe185, 0x92cc, 0xebb9, 0x04be, 0xfa92, 0x3e25, 0xca8a, 0x27f0, 0x86b7, 0xd455, 0x16f6, 0x9077, 0x7214, 0x3523, 0x77c9,
    0xbdd9, 0x00b3, 0xb3b3, 0x84bb, 0xfa4f, 0xe3f8, 0xcda7, 0x7dec, 0x32b2, 0x9169, 0x7d01, 0xdf5f, 0xa7b9, 0xca26, 0x8b5c, 0xe2c1,
    0xe595, 0xc6f0, 0x91fe, 0xea96, 0x3a9a, 0x3119, 0x09df, 0x468c, 0xe85a, 0xd440, 0x03e3, 0xd0fe, 0xf971, 0xeedb, 0x33fb, 0xc92b,
    0xb54c, 0x1d7e, 0xa3ba, 0x8d09, 0xd1ae, 0xb82a, 0xa667, 0x05f3, 0xa6d4, 0xb640, 0x226f, 0x4c0f, 0xc197, 0x81a8, 0xbc7b, 0xb31a,
    0x2d12, 0xce1b, 0xf24d, 0x69a2, 0x386b, 0xe2fe, 0xdaaa, 0x076b, 0x1c5a, 0x9695, 0xf6cc, 0xac0f, 0xc7d5, 0xa5d0, 0x8159, 0x4d8a,
    0x5519, 0x4e69, 0x85e7, 0xb718, 0x6b3c, 0x84e3, 0xa217, 0x31af, 0xbf69, 0x9215, 0x3260, 0x43bb, 0x8a4a, 0xe5dc, 0x8fb9, 0x4308,
    0x39f9, 0x6167, 0x75f6, 0xa0f0, 0xf45e, 0x1c8b, 0x4744, 0x3199, 0x895f, 0xc3d4, 0xe0fd, 0xfbbf, 0x0203, 0x2115, 0x0568, 0x3d4f,
    0x93fd, 0xcb83, 0x3ff2, 0x0c56, 0x9a22, 0x8d0f, 0xd7a8, 0xd816, 0x99c1, 0x5df1, 0x2ed9, 0x36cd, 0xaa3a, 0x94da, 0x9b95, 0x2bb3,
    0x0980, 0x19d3, 0x4a3b, 0x9399, 0xafe7, 0x1c20, 0xecef, 0x25d9, 0x8d88, 0x502f, 0x2d78, 0xa471, 0x31f3, 0xe335, 0x006a, 0x6a6a,
    0xc3be, 0x8a97, 0x3801, 0x8894, 0x1914, 0x8dfc, 0x245b, 0x1e01, 0xefd8, 0x21f3, 0xe38e, 0xbbd1, 0x6e81, 0x6c79, 0xb697, 0xf5b8,
    0xeb66, 0xdb61, 0xddab, 0x715b, 0x4971, 0xeace, 0x62c2, 0xe34e, 0x7b11, 0xa975, 0xe888, 0x0692, 0xf4a8, 0xea7d, 0xd171, 0x67f5,
    0x815e, 0x4a8d, 0x252f, 0x7b7e, 0xc61a, 0x7b14, 0xac70, 0xb8aa, 0x26e7, 0x80ab, 0xae73, 0x99bf, 0x238f, 0xbde4, 0x3d8e, 0x523c,
    0x1c7d, 0xb1b2, 0xa7ac, 0xdf33, 0xcbd5, 0x69a4, 0x3e6d, 0x82c2, 0xe50c, 0x5f69, 0x9457, 0x1618, 0x7e99, 0x74da, 0x9dd7, 0x0fcb,
    0x34a2, 0xe743, 0x3230, 0x13eb, 0xd84d, 0xc29a, 0xbfb8, 0x43c4, 0xf535, 0x66eb, 0x8e4b, 0xa0f1, 0xf55f, 0x0c81, 0x4df5, 0x2a66,
    0xcd5e, 0x8415, 0x54e1, 0xa79a, 0xe905, 0x9a14, 0xbb39, 0x8669, 0x0a8b, 0x21c5, 0xd5b8, 0xea10, 0xbc1c, 0xd47d, 0x3ede, 0x3171,
    0x61b7, 0xa526, 0x77af, 0xdbbf, 0x0375, 0x4668, 0x0cbe, 0x72ca, 0xebfd, 0x40fa, 0xf816, 0x98b7, 0x3a8c, 0x270f, 0x7948, 0xd23a,
    0x1fa3, 0x5c71, 0xbf52, 0xa92e, 0xb3d3, 0xe4db, 0x99b5, 0x2985, 0x1da0, 0x7d64, 0xba3a, 0x9461, 0x202e, 0x2f58, 0xa647, 0x25d3,
    0x8782, 0xf06b, 0x6d92, 0x4c77, 0xb9ef, 0x72a9, 0x889e, 0x131e, 0x2db8, 0x64b1, 0xf607, 0x67c4, 0xb06f, 0x6b7a, 0xc2a5, 0x8087,
    0x825f, 0x7891, 0x1ae8, 0x421d, 0x3de7, 0x3b55, 0xefdd, 0x24f6, 0xb3ac, 0x9ba4, 0x1a82, 0x2877, 0xfe59, 0xb1c2, 0xd7dc, 0xac62,
    0xaab8, 0x1658, 0x3ed9, 0x3676, 0x1181, 0x9031, 0x3452, 0x17b3, 0xc439, 0x7a21, 0x884e, 0xc3ce, 0xfae7, 0x4b50, 0xe9f9, 0x66e8,
    0x8d48, 0x90ef, 0xea8c, 0x2080, 0x81f6, 0xe225, 0x0171, 0x607a, 0x79e0, 0x7a92, 0x3bfd, 0x4775, 0x00a8, 0xa8a8, 0x245e, 0x1b04,
    0xbffa, 0x0186, 0x978d, 0xffdf, 0x264f, 0x2803, 0x8a2d, 0x82bb, 0x9c75, 0xbc62, 0xaa03, 0xade3, 0x3a32, 0x99b1, 0x2d81, 0x5d88,
    0x57a0, 0xd5c6, 0x946e, 0x2f21, 0xdf3e, 0xc6d8, 0xb9d6, 0x4b90, 0x2939, 0xa11c, 0x09b9, 0x20ea, 0xeb9c, 0x219b, 0x8be6, 0x587b,
    0xf174, 0x6386, 0xb601, 0x632e, 0x1ea9, 0x4770, 0x05ad, 0xf88a, 0x042b, 0x6f07, 0xfbf4, 0x4948, 0xd3f7, 0xc365, 0x514c, 0x5f10,
    0xed2e, 0xf513, 0x40cd, 0xcf21, 0xd97c, 0xe2a0, 0x84f4, 0xb500, 0x5132, 0x216e, 0x7e13, 0xfe50, 0xb8cb, 0x4786, 0xf35b, 0x6ebf,
    0x5247, 0x6706, 0x72ad, 0x8c9a, 0x5336, 0x077c, 0x0b4d, 0xf608, 0x68cb, 0x4009, 0x0be5, 0x5ea0, 0x4c95, 0x5b0d, 0xb41f, 0x5f26,
    0xdb18, 0xa4d2, 0x9250, 0x7725, 0x5135, 0x2669, 0x0e25, 0xcb47, 0xfb36, 0x8b8a, 0x3417, 0x52f6, 0xd6b7, 0xd602, 0x63b7, 0x8730,
    0x42d9, 0xf923, 0xbc89, 0x41e8, 0xfb0f, 0xb2b3, 0x95b0, 0xe0f4, 0xf2b6, 0x9259, 0x7e2c, 0xc16f, 0x7950, 0xca22, 0x8f58, 0xa2e9,
    0xcf51, 0xa90c, 0x91f1, 0xe599, 0xcafc, 0x5186, 0x95da, 0x8a9e, 0x3108, 0x18ce, 0x462d, 0x49fb, 0x6044, 0x47de, 0xab03, 0xbce8,
    0x2089, 0x88ff, 0x727f, 0x5e48, 0xa47d, 0x3dff, 0x234d, 0x7f26, 0xda6e, 0xc3af, 0x9b86, 0x38a0, 0x2935, 0xad10, 0xc9c1, 0x5fa6,
    0x5b98, 0x218a, 0x9af7, 0x58da, 0x50d5, 0xd782, 0xf23c, 0x18d3, 0x5b30, 0x8922, 0xbea9, 0x43de, 0xef2f, 0xd604, 0x65b1, 0xe70c,
    0x7d7f, 0xa121, 0x3484, 0xc165, 0x735a, 0x6a66, 0xcfb2, 0x4aef, 0x474d, 0x3890, 0x1905, 0x9ced, 0x24fa, 0xbfa0, 0x5bdc, 0x65ce,
    0x9873, 0xfe48, 0xa0d3, 0xd77d, 0x0dc3, 0x1ebc, 0x5265, 0x4524, 0x73ef, 0xdfd3, 0x2b35, 0x8f06, 0xfcb7, 0x7d3a, 0xe464, 0x260a,
    0x6d46, 0x98a3, 0x2e98, 0x778c, 0xf89c, 0x123d, 0x1f90, 0x6f42, 0xbeb1, 0x5bc6, 0x7fd4, 0x289c, 0x15b2, 0xe72e, 0x5f5d, 0xa063,
    0x67cd, 0xb966, 0xfb20, 0x9d9c, 0x4480, 0xc640, 0x214e, 0x5e33, 0xdf06, 0xfee0, 0x087b, 0xf323, 0x16c7, 0xa146, 0x53e3, 0xd2a9,
    0x8c30, 0xf99c, 0x0336, 0x052b, 0x7e0c, 0xe14f, 0x5806, 0x8c09, 0xc0a5, 0xa291, 0xb729, 0x5a0d, 0xa514, 0x459d, 0xca56, 0xfb2c,
    0x9190, 0x84f8, 0xb90c, 0x914a, 0x5e22, 0xce17, 0xfe41, 0xa9da, 0x4727, 0x52fa, 0xdabb, 0x167a, 0x1cfb, 0x3734, 0x42c8, 0xe832,
    0xbc28, 0xe049, 0x4f0b, 0xf68e, 0xee4d, 0xa56d, 0x3ce4, 0x295d, 0xc578, 0x2a6b, 0xc053, 0x5467, 0x211c, 0x0c61, 0xad15, 0xccc4,
    0x0f84, 0x7bed, 0x5589, 0xdef9, 0x1014, 0x14af, 0xeb38, 0x853f, 0x6fc0, 0x3c33, 0xfe8a, 0x6211, 0x309d, 0x9c50, 0x9947, 0xdb77,
    0xcbbd, 0x01cc, 0xddc7, 0x1d37, 0xeaf3, 0x5fff, 0x02c1, 0xe3d7, 0xe288, 0xacdc, 0x1406, 0x4291, 0xb16b, 0x7e75, 0x9836, 0xbb0d,
    0xb25d, 0x7b5e, 0xe63a, 0x5a42, 0xea5b, 0xf757, 0x269f, 0xf8d3, 0x5d72, 0xad5a, 0x838b, 0xbd4e, 0x9724, 0x5676, 0x121b, 0x39b6,
    0x2e28, 0xc73c, 0x4c39, 0xf7a1, 0xd069, 0x6ee6, 0x0b1e, 0xa55b, 0x0ad2, 0x789c, 0x17e5, 0x926f, 0x481a, 0x90ae, 0xabcd, 0x7226,
    0x0711, 0x6620, 0x4580, 0xd74b, 0x3bf5, 0x4f7d, 0x80f8, 0xfd20, 0xfba6, 0x1b1a, 0xa1e4, 0xf141, 0x56b3, 0xd7de, 0xae60, 0x8aac,
    0x033a, 0x0927, 0xbe74, 0x9e03, 0xe802, 0x8c18, 0xd1b4, 0xa230, 0x1688, 0xee09, 0xe129, 0x3e60, 0x8fcf, 0x357e, 0x2a94, 0x3fac,
    0x5208, 0x2849, 0xc067, 0x6053, 0x50c9, 0xcb9e, 0x22ef, 0xcc8f, 0x44cf, 0x890f, 0x9384, 0xb2fa, 0xdcf9, 0x3202, 0x21d9, 0xc9a4,
    0x3ac3, 0x6840, 0xcb82, 0x3ef3, 0x1c5c, 0x9093, 0x96f0, 0x93a9, 0x9fd7, 0x2ddd, 0x01d4, 0xc5df, 0x8dcc, 0x146b, 0x2ffc, 0x02e3,
    0xc1f5, 0xe3ca, 0xff95, 0x6c05, 0xcaeb, 0x4691, 0xf547, 0x1499, 0xdd0e, 0xd4fe, 0xbd5d, 0x8437, 0x76c3, 0xa6d8, 0xba4c, 0xe217,
    0x3343, 0x7193, 0x81b9, 0xad6a, 0xb3bb, 0x8cb3, 0x7a1f, 0xb670, 0x125f, 0x7df2, 0x2cac, 0x61ae, 0xbc3f, 0xf75e, 0x2f96, 0x6889,
    0x024b, 0x695d, 0xc794, 0xe491, 0xd3ff, 0xcb6d, 0xd11c, 0x0a98, 0x32d6, 0xf50d, 0x5ed3, 0x3fe6, 0x1842, 0xcaa1, 0x0cdb, 0x17af,
    0xd825, 0xaaf2, 0x5c12, 0xdc31, 0xfaca, 0x667d, 0x18dd, 0x553e, 0x694e, 0xd487, 0xc424, 0x673c, 0x4897, 0x1d23, 0xfee7, 0x0f7c,
    0x8315, 0x23d0, 0xe2bb, 0x9fef, 0x15e5, 0xb079, 0x7d6c, 0xb232, 0x1431, 0x75a6, 0xf0a0, 0xa659, 0x3bcd, 0x7745, 0x3155, 0x4593,
    0xc458, 0x1b40, 0xfbbe, 0x0302, 0x311f, 0x0fd9, 0x26b0, 0xd7fc, 0x8c42, 0x8bee, 0x5073, 0x7124, 0x360e, 0x69f9, 0x6330, 0x00b7,
    0xb7b7, 0xc493, 0xd08b, 0x8c04, 0xcda8, 0x72e3, 0xc2d4, 0xf1f6, 0xe104, 0x134d, 0x7eeb, 0x06a8, 0xce92, 0x7bc4, 0x7ca0, 0x6ff5,
    0x0906, 0x9f55, 0xaf5f, 0xa498, 0xd81a, 0x95cd, 0x9d89, 0x5195, 0x86c9, 0xaa2b, 0x85cb, 0x9b34, 0x8a12, 0xbd84, 0x5dee, 0x31c6,
    0xd600, 0x61b5, 0xa724, 0x57bb, 0xcedd, 0x348b, 0xce6a, 0x833c, 0x0af9, 0x53b7, 0x86fd, 0x9e1f, 0xf41e, 0x5ccb, 0x05e8, 0xbdcf,
    0x16a5, 0xc324, 0x100d, 0x0db6, 0x6bc9, 0x7116, 0x043c, 0x7810, 0x9b69, 0xd74f, 0x3ff1, 0x0f55, 0xaa3c, 0x92dc, 0xfba9, 0x1415,
    0x5182, 0x91de, 0xcab6, 0x1bcc, 0x7732, 0x4622, 0x46f4, 0x9022, 0x2741, 0x3706, 0x70fa, 0xf9db, 0x4471, 0x37b1, 0xc74d, 0x3d48,
    0x94fa, 0xbbb5, 0x0ae5, 0x4fab, 0x562e, 0x4a43, 0xebe1, 0x5ce6, 0x28c5, 0x4ceb, 0x2573, 0x2722, 0x5465, 0x231e, 0x2c75, 0xb877,
    0xfb3a, 0x8786, 0xf46f, 0x2dba, 0x66b3, 0xd613, 0x72a6, 0x8791, 0xe378, 0x4d27, 0xf8b4, 0x3a15, 0xbe96, 0x7ce1, 0x2eb4, 0x5ba0,
    0x19b2, 0x2b5a, 0xe069, 0x6f2b, 0xd7d8, 0xa866, 0xea90, 0x3c9c, 0x5125, 0x3679, 0x1e8e, 0x6057, 0x54cd, 0x8bb6, 0x082b, 0xa373,
    0x44c0, 0x8600, 0x63e2, 0xd265, 0x40fc, 0xfe10, 0xf88b, 0x052a, 0x7f0d, 0xf145, 0x52b7, 0x97f6, 0x84a4, 0xe550, 0x0335, 0x0628,
    0x4e12, 0xfe9c, 0x7407, 0x400a, 0x08e6, 0x6ebe, 0x5346, 0x770c, 0x781c, 0x9765, 0x1737, 0x40bd, 0xbf51, 0xaa2d, 0x83cd, 0xfb08,
    0xb5b4, 0xe586, 0xd5e3, 0xb14b, 0x5e55, 0xb960, 0xfd26, 0xfda0, 0x7b26, 0x9e42, 0xa943, 0xdebe, 0x5753, 0x2635, 0x5279, 0x5938,
    0xa33c, 0x0b8f, 0x34ca, 0x8f2b, 0xd19a, 0x8c1e, 0xd7b2, 0xc20c, 0x292e, 0xb60b, 0x6924, 0xbeed, 0x079a, 0xedab, 0x7096, 0x95b7,
    0xe7f3, 0x8280, 0xa74e, 0x3dd1, 0x0d63, 0xbe1c, 0xf66b, 0x0ba8, 0x13ed, 0xde4b, 0xa2a6, 0x801e, 0x1bc6, 0x7d38, 0xe666, 0x061e,
    0x7824, 0xaf5d, 0xa69a, 0xf80e, 0x80af, 0xaa77, 0xd997, 0x094b, 0xd218, 0x3d81, 0x5d33, 0xec1b, 0xd12d, 0x3ba9, 0x1321, 0x1287,
    0xa52a, 0x7ba3, 0x1bc7, 0x7c39, 0xf66c, 0x0caf, 0x63db, 0xeb5c, 0xe15b, 0x4c12, 0xdc8a, 0x4171, 0x6296, 0xb71a, 0x693e, 0xa4f7,
    0xb775, 0x0651, 0x376b, 0x1d97, 0x4a53, 0xfbf1, 0x4c4d, 0x83d5, 0xe310, 0x254f, 0x1b1e, 0xa5e0, 0xb169, 0x7c77, 0xb822, 0xae6f,
    0x85a3, 0xf35c, 0x69b8, 0x2271, 0x5211, 0x3150, 0x4096, 0x947a, 0x3b35, 0x8fbd, 0x470c, 0x79d1, 0x4ba3, 0x1a0a, 0xa0ff, 0xfb51,
    0xeced, 0x27db, 0xad9c, 0x454d, 0x1a86, 0x2c73, 0xbe71, 0x9b06, 0xb820, 0xac6d, 0xa5b7, 0xe63e, 0x5e46, 0xaa73, 0xdd93, 0x4963,
    0xf8dc, 0x527d, 0x5d3c, 0xe314, 0x214b, 0x5b36, 0x8f24, 0xde95, 0x7c78, 0xb72d, 0x5e09, 0xe53c, 0x6f59, 0xa5aa, 0xfb23, 0x9e9f,
    0x749e, 0xd993, 0x0d4f, 0x9230, 0x1745, 0x32cf, 0xec14, 0xde22, 0xcbcf, 0x73be, 0x8e82, 0x6938, 0xa2f1, 0xd749, 0x39f7, 0x6f69,
    0x959a, 0xcade, 0x73a4, 0x9498, 0xd9d7, 0x490b, 0x90b4, 0xb1d7, 0xc2c9, 0xeceb, 0x21dd, 0xcda0, 0x7aeb, 0x4284, 0xa47e, 0x3efc,
    0x1353, 0x60f5, 0xf66f, 0x0fac, 0x53c5, 0xf48f, 0xcd5a, 0x8011, 0x14c9, 0x8d5e, 0x86f9, 0x9a1b, 0xb436, 0x760f, 0x6a14, 0xbdc0,
    0x19aa, 0x3342, 0x7092, 0x91b3, 0xa7db, 0xa844, 0xc8b2, 0x3dde, 0x026c, 0x4e7a, 0x96f4, 0x97ad, 0xdfff, 0x0719, 0x6e28, 0xc5d0,
    0x82c3, 0xe40d, 0x4f63, 0x9ee6, 0x0de7, 0x3a98, 0x331b, 0x29cb, 0x53ee, 0xdfa4, 0x5c42, 0x8c61, 0xa8cd, 0x413b, 0x28dc, 0x55f2,
    0xa582, 0xd30b, 0x3f99, 0x673d, 0x4996, 0x0d29, 0xf456, 0x1483, 0xc714, 0x6411, 0x56a7, 0xc3ca, 0xfee3, 0x0b78, 0xc33d, 0x0914,
    0x8d47, 0x9fe0, 0x1aea, 0x401f, 0x1df3, 0x2e37, 0xd823, 0xacf4, 0x3c2e, 0xe397, 0xa2c8, 0xee70, 0x9850, 0xdd6b, 0xb19b, 0x8e85,
    0x6e3f, 0xd2c7, 0xe25e, 0x7a0a, 0xa365, 0x52d6, 0xf697, 0xf754, 0x259c, 0xc8cd, 0x42a1, 0x815b, 0x4f88, 0x750d, 0x5b0b, 0xb219,
    0x3f1a, 0xe4be, 0xfcd0, 0x1a5d, 0xf7a8, 0xd960, 0xfebc, 0x5427, 0x615c, 0x4ecd, 0x2143, 0x533e, 0x0f74, 0x8b1d, 0xa380, 0xb733,
    0x4017, 0x15fb, 0xae67, 0x8dab, 0x730c, 0x3c30, 0xfd89, 0x520f, 0x2f4e, 0xb051, 0x5544, 0x1334, 0x0792, 0xe5a3, 0xf0c6, 0xc03f,
    0x380b, 0x829e, 0xb950, 0xcd16, 0xcc5d, 0x961d, 0x7e44, 0xa907, 0x9afa, 0x55d7, 0x80a7, 0xa27f, 0x59c7, 0x5cc3, 0x0de0, 0x3d9f,
    0x432d, 0x1cdc, 0x1013, 0x13a8, 0x9b0e, 0xb028, 0x2c3d, 0xf03f, 0x39c6, 0x5e58, 0xb46d, 0x2d54, 0x885d, 0xd0dd, 0xda52, 0xff93,
    0x6a03, 0xaad7, 0x7937, 0xad45, 0x9c94, 0x5d83, 0x5cab, 0x6588, 0xde35, 0xdcd8, 0x1323, 0x1085, 0x853e, 0x6ec1, 0x2c39, 0xf43b,
    0x79ee, 0x749c, 0xdb91, 0x2d5b, 0x8752, 0x20bb, 0xbacd, 0x6396, 0xa611, 0x7385, 0xb5b9, 0xe88b, 0x0591, 0xc4b6, 0xf5ae, 0xfd70,
    0xabf6, 0x491d, 0x86a2, 0xc140, 0x567f, 0x1b12, 0xa9ec, 0x7111, 0x033b, 0x0826, 0xae7e, 0x94b2, 0xf3fd, 0xc819, 0x9675, 0x162c,
    0x4aad, 0x050f, 0x5a28, 0x8031, 0x34e9, 0xac08, 0xc0d2, 0xd5e6, 0xb44e, 0x0e77, 0x9915, 0x8925, 0xb9ae, 0x33e8, 0xda38, 0x95f9,
    0xa9bd, 0x2040, 0x4136, 0x25d1, 0x8580, 0xd07f, 0x78f0, 0x7b89, 0x31ed, 0xfd2b, 0xf0ad, 0xab54, 0xebbf, 0x02b8, 0x9aae, 0x0183,
    0x9288, 0xaffd, 0x063a, 0x5c00, 0xce23, 0xca75, 0xd80f, 0x80d8, 0xdd00, 0xdaf0, 0x5d31, 0xee19, 0xf139, 0x2ecb, 0x24df, 0x9a85,
    0x2aa8, 0x0390, 0xa38d, 0xba3e, 0x9065, 0x6006, 0x059c, 0xc9bb, 0x25dc, 0x888d, 0x000d, 0x0d0d, 0xd072, 0x75fd, 0xabfb, 0x4410,
    0x56d0, 0xb4bd, 0xfd84, 0x5f02, 0xff3c, 0xc5ac, 0xfebf, 0x5724, 0x5142, 0x511e, 0x0d42, 0x9f3d, 0xc737, 0x4732, 0x47ef, 0x9a32,
    0x9d1f, 0xc703, 0x7306, 0x363a, 0x5dcd, 0x12e5, 0xc748, 0x384d, 0xc4d8, 0x9bc0, 0x7ee6, 0x0ba5, 0x1ee0, 0x0e39, 0xd75b, 0x2be5,
    0x5fd6, 0x2be8, 0x52db, 0xfb9a, 0x2726, 0x5061, 0x6336, 0x06b1, 0xd78b, 0xfb35, 0x8889, 0x0409, 0x4d25, 0xfab6, 0x1a01, 0xabf4,
    0x4b1f, 0xa6b6, 0xd422, 0x6181, 0x9310, 0x266e, 0x0922, 0xbb71, 0xce21, 0xc877, 0xf81b, 0x95ba, 0xeafe, 0x52f2, 0xd2b3, 0x962a,
    0x4973, 0xe8cc, 0x42d6, 0xf62c, 0x4cef, 0x2177, 0x670a, 0x7ea1, 0x4ce2, 0x2c7a, 0xb778, 0x0b5c, 0xe719, 0x686a, 0xe1a8, 0xbfe1,
    0x1a9d, 0x3768, 0x1e94, 0x7a4d, 0xe422, 0x604c, 0x4fd6, 0x2b53, 0xe960, 0xff71, 0x88e1, 0x6c61, 0xae8f, 0x6543, 0x15fe, 0xab62,
    0xdd89, 0x5379, 0x4833, 0xb987, 0x1ac1, 0x6b34, 0x8ceb, 0x2247, 0x6427, 0x6091, 0x920b, 0x2c7e, 0xb37c, 0x4b74, 0xcddd, 0x0796,
    0xe1a7, 0xb0ee, 0xeafb, 0x57f7, 0x8291, 0xb65f, 0x3d70, 0xacc2, 0x0a18, 0xb256, 0x7055, 0x5674, 0x1019, 0x19a2, 0x3b4a, 0xf0c2,
    0xc43b, 0x7823, 0xa85a, 0xd6ac, 0xcd19, 0xc352, 0x667b, 0x1edb, 0x3502, 0x56e8, 0x8c85, 0x4c29, 0xe7b1, 0xc0c2, 0xc5f6, 0xa4e5,
    0xa567, 0x36ee, 0x8919, 0x8592, 0xc26d, 0x484f, 0xc5fb, 0xa9e8, 0x7515, 0x4313, 0x22e2, 0xc182, 0x94bd, 0xfcf2, 0x387f, 0xf6ea,
    0x8a29, 0x86bf, 0xdc5d, 0x96a6, 0xc5ff, 0xadec, 0x353d, 0x69d7, 0x4d1e, 0xc18d, 0x9bb2, 0x0c94, 0x58e0, 0x6aef, 0x463b, 0x5fed,
    0x10d3, 0xd368, 0x5cfa, 0x34d9, 0x9c38, 0xf12f, 0x38dd, 0x5448, 0x0e33, 0xdd51, 0x8ba1, 0x1f3c, 0xc3ee, 0xdac7, 0x6a06, 0xafd2,
    0x2915, 0x8d30, 0xe897, 0x198d, 0x1465, 0x21f2, 0xe28f, 0xabdb, 0x6430, 0x7786, 0xf296, 0xb279, 0x5f7a, 0x8744, 0x36ad, 0xca5a,
    0xf720, 0x51e8, 0xfbb4, 0x0908, 0x915b, 0x4f33, 0xceb6, 0x5fe0, 0x1dde, 0x031a, 0x2907, 0x9f22, 0xd828, 0xa7ff, 0x8c60, 0xa9cc,
    0x5131, 0x226d, 0x4e0d, 0xe183, 0x94ca, 0x8b85, 0x3b18, 0xa290, 0xb628, 0x4a07, 0xafa5, 0x5e62, 0x8e57, 0xbced, 0x258c, 0xd8dd,
    0x520a, 0x2a4b, 0xe073, 0x7531, 0x6737, 0x439c, 0xad6d, 0xb4bc, 0xfc85, 0x4f08, 0xf58d, 0xde53, 0xbabe, 0x10e5, 0xe55e, 0x0d3b,
    0xe644, 0x243c, 0x7966, 0xfc14, 0xde99, 0x7074, 0x7755, 0x2145, 0x5538, 0x6f48, 0xb4bb, 0xfb82, 0x3f3e, 0xc09a, 0x9dae, 0x76b2,
    0xd7a9, 0xd917, 0x89cb, 0x5740, 0x3526, 0x72cc, 0xedfb, 0x20c6, 0xc7b0, 0xc0b5, 0xb281, 0xa782, 0xf11d, 0x0aef, 0x45a1, 0xf66a,
    0x0aa9, 0x03e7, 0xd4fa, 0xb959, 0xc41f, 0x5c07, 0xc924, 0xba43, 0xed18, 0xc325, 0x110c, 0x1dbc, 0x6178, 0x6ae9, 0x403d, 0x3fd1,
    0x2f75, 0x8b6a, 0xd4f7, 0xb454, 0x146d, 0x29fa, 0x62df, 0xfe53, 0xbbc8, 0x7798, 0xec88, 0x42be, 0x9e44, 0xaf45, 0xbe82, 0x68f5,
    0x7e37, 0xda74, 0xd9b5, 0x2b69, 0xd35a, 0x6ec8, 0x2530, 0x6461, 0x26d7, 0xb09b, 0x9f8e, 0x7484, 0xc389, 0xbda0, 0x79ca, 0x50b8,
    0xbaef, 0x41b4, 0xa753, 0x20cc, 0xcdba, 0x60f1, 0xf26b, 0x4f84, 0x7901, 0x9b73, 0xcd55, 0x8f1e, 0xe4af, 0xedc1, 0x1afc, 0x5609,
    0x6d64, 0xba81, 0x2fda, 0x24c5, 0x809f, 0x9a47, 0xe86a, 0xe470, 0x321e, 0x3dc5, 0x1977, 0xee9f, 0x77bf, 0xcbaf, 0x13de, 0xed78,
    0xa345, 0x72f6, 0xd7c1, 0xb17f, 0x6a61, 0xc8b5, 0x3ad9, 0x725a, 0x7b6d, 0xd509, 0x5ba1, 0x18b3, 0x3b50, 0xead8, 0x74d4, 0x93d9,
    0xefa7, 0x5e8c, 0x60b9, 0xba23, 0x8d78, 0xa0df, 0xdb71, 0xcdbb, 0x61f0, 0xe261, 0x4535, 0x62fe, 0xdf72, 0x8a94, 0x3b02, 0xb88a,
    0x06c7, 0xa1fd, 0xe858, 0xd642, 0x23f7, 0xc59c, 0xce8f, 0x66d9, 0xbc79, 0xb118, 0x0d06, 0xdb79, 0xc5b3, 0xe1a0, 0xb7e9, 0x9acd,
    0x62e0, 0xc16c, 0x7a53, 0xfa3c, 0x908b, 0x8ee8, 0x0352, 0x614f, 0x5dde, 0x01f6, 0xe7fd, 0x8c8e, 0x4722, 0x57ff, 0x8a99, 0x360f,
    0x68f8, 0x733a, 0x0a06, 0xac48, 0x8092, 0x974a, 0x3818, 0x918d, 0x99e5, 0x79d5, 0x4fa7, 0x5a22, 0x8a3b, 0x94ad, 0xece2, 0x28d4,
    0x5dfa, 0x25d2, 0x8683, 0xe061, 0x6723, 0x5788, 0xfdee, 0x3568, 0x3c82, 0x4f3b, 0xc6be, 0xdfb0, 0x4856, 0xdce2, 0x2919, 0x813c,
    0x28ef, 0x66c1, 0xa461, 0x21e3, 0xf39e, 0xab7a, 0xc591, 0xc382, 0xb6ab, 0xc984, 0x1ae3, 0x4916, 0x8da9, 0x710e, 0x1c24, 0xe8eb,
    0x65f1, 0xa74c, 0x3fd3, 0x2d77, 0xab7e, 0xc195, 0x83aa, 0x9c6f, 0xa678, 0x1aec, 0x4619, 0x7dcf, 0x1191, 0x8021, 0x24f9, 0xbca3,
    0x6bc2, 0x7a1d, 0xb472, 0x324b, 0x6890, 0x1b52, 0xe9ac, 0x33bd, 0x8f6d, 0x97dc, 0xae8e, 0x6442, 0x05f4, 0xa1d3, 0xc676, 0x1778,
    0x0ff2, 0x0d9b, 0x46e4, 0x8032, 0x37ea, 0x9c16, 0xdf01, 0xf9e7, 0x784d, 0xc634, 0x553a, 0x6d4a, 0x94af, 0xeee0, 0x08c0, 0x4898,
    0x122c, 0x0e81, 0x6fe3, 0x1f10, 0xefc2, 0x3be9, 0x5361, 0x502b, 0x297c, 0xe459, 0x1b37, 0x8cc9, 0x0065, 0x6565, 0x33d8, 0xea08,
    0xa404, 0x4486, 0xc046, 0x4172, 0x6195, 0x8704, 0x76ed, 0x88f6, 0x7b76, 0xce12, 0xfb44, 0xf9f8, 0x6752, 0x26f9, 0x9eb5, 0x5eb4,
    0x5881, 0x0b8e, 0x35cb, 0x9f21, 0xdb2b, 0x97e1, 0x93b3, 0x85cd, 0x9d32, 0xea2e, 0x8222, 0x05ec, 0xb9cb, 0x568d, 0xe9e0, 0x7ff1,
    0x0db9, 0x64c6, 0x8170, 0x64a3, 0xe415, 0x577b, 0x0e1d, 0xf37f, 0x4a9b, 0x3339, 0x0be9, 0x52ac, 0x8ced, 0x2441, 0x041b, 0x5f37,
    0xca09, 0xa473, 0x33f1, 0xc321, 0x1508, 0x5d94, 0x4bbc, 0x0515, 0x4032, 0x30de, 0xdf13, 0xebf5, 0x48f2, 0x7846, 0xcd3f, 0xe574,
    0x2711, 0x6756, 0x22fd, 0xde9d, 0x7470, 0x377d, 0x0b81, 0x3ac4, 0x6f47, 0xbbb4, 0x0be4, 0x5fa1, 0x5c9f, 0x51bc, 0xafe0, 0x1b27,
    0x9cd9, 0x10ce, 0xce75, 0x9c23, 0xea34, 0x9838, 0xb503, 0x5231, 0x1170, 0x61c0, 0xd251, 0x74c8, 0x8fc5, 0x3f74, 0x8ad0, 0x7f46,
    0xba0e, 0xa055, 0x51fb, 0xe8a7, 0x29bd, 0x2598, 0xccc9, 0x0289, 0xab9f, 0x2074, 0x7502, 0x5404, 0x427f, 0x5f85, 0x78bb, 0x30c2,
    0xc30f, 0x3b26, 0x9cae, 0x67b9, 0xcd12, 0xc859, 0xd635, 0x5480, 0xc6fb, 0x9af5, 0x5ad8, 0x70c1, 0xc2e0, 0xc5c2, 0x90d1, 0xd4b2,
    0xf111, 0x06e3, 0x85d9, 0x8926, 0xbaad, 0x03f6, 0xc5eb, 0xb9f8, 0x65be, 0xe803, 0x8d19, 0xc1be, 0xa881, 0x0d77, 0xaa08, 0xa6e8,
    0x8a7c, 0xd3ea, 0xde78, 0x9195, 0x81fd, 0xe92e, 0xb13f, 0x2a21, 0x8a19, 0xb68f, 0xeda0, 0x7b9d, 0x25f9, 0xada8, 0x7179, 0x6b53,
    0xeb8c, 0x318b, 0x9b4d, 0xf36b, 0x5e8f, 0x63ba, 0x8a3d, 0x92ab, 0x8cde, 0x1772, 0x05f8, 0xaddf, 0x060e, 0x6834, 0xbff6, 0x0d8a,
    0x57f5, 0x8093, 0x964b, 0x2812, 0x9b3c, 0x821a, 0x3dd4, 0x0866, 0xee3e, 0xd61e, 0x7fab, 0x57e3, 0x9685, 0xe6dc, 0xbca4, 0x6cc5,
    0x0a2b, 0x8165, 0x71b6, 0xa49c, 0xdc1e, 0xd5e5, 0xb74d, 0x3e69, 0x86c6, 0xa524, 0x75ad, 0xfbab, 0x1617, 0x7196, 0x84bc, 0xfd48,
    0x93ce, 0xf8b0, 0x3e11, 0xfebe, 0x5625, 0x4148, 0x5baf, 0x16bd, 0xdb3c, 0x80f6, 0xf32e, 0x1bca, 0x7134, 0x261e, 0x7952, 0xc820,
    0xaf4c, 0xb78b, 0xf8af, 0x210e, 0x1e73, 0x9daa, 0x72b6, 0x9781, 0xf3d3, 0xe637, 0x574f, 0x3a29, 0x82aa, 0x8d64, 0xbcc3, 0x0ba2,
    0x19e7, 0x7e0f, 0xe24c, 0x6818, 0x93da, 0xeca4, 0x6e92, 0x7f6a, 0x9622, 0x417b, 0x689c, 0x175e, 0x29d4, 0x4cf1, 0x3f69, 0x97cd,
    0xbf9f, 0x64e3, 0xa455, 0x15d7, 0x824b, 0x6c85, 0x4a6b, 0xc3c9, 0xfde0, 0x3b66, 0xdcee, 0x2515, 0x4144, 0x57a3, 0xd6c5, 0xa470,
    0x30f2, 0xf33f, 0x0adb, 0x7195, 0x87bf, 0xcd56, 0x8c1d, 0xd4b1, 0xf212, 0x36fd, 0x9a0a, 0xa527, 0x76ae, 0xcbb5, 0x09c4, 0x5d97,
    0x48bf, 0x350b, 0x5fe1, 0x1cdf, 0x1310, 0x23b6, 0x84dd, 0x9c29, 0xe03e, 0x387c, 0xf5e9, 0xba37, 0x996c, 0xf05c, 0x5aa5, 0x0dbc,
    0x61c3, 0xd152, 0x44d6, 0x9016, 0x1375, 0x46d3, 0xb705, 0x7621, 0x443a, 0x7cfa, 0x35af, 0xfb45, 0xf8f9, 0x7758, 0x2c48, 0x854a,
    0x1ab5, 0x1f40, 0xbf92, 0x69ee, 0x7427, 0x602a, 0x29b0, 0x2895, 0x1cbb, 0x7774, 0x0064, 0x6464, 0x23d2, 0xe0b9, 0xbffb, 0x0087,
    0x8787, 0xf56e, 0x3db0, 0x6c02, 0xcdec, 0x36a7, 0xc050, 0x5764, 0x1102, 0x13b2, 0x8114, 0x00c7, 0xc7c7, 0xb7c2, 0xb1e6, 0xf3f8,
    0xcd1c, 0xc657, 0x3659, 0x3eae, 0x4101, 0x12e6, 0xc44b, 0x0853, 0xdb0b, 0xb7c1, 0xb2e5, 0xc3e6, 0xd2cf, 0xea56, 0xfa5a, 0xf6ed,
    0x8d2e, 0xf689, 0xe94a, 0xd55b, 0x09f3, 0x6aa0, 0x0974, 0xed27, 0xfc1a, 0xd097, 0x9018, 0x1d7b, 0xa6bf, 0xdd2b, 0xf1db, 0xcc29,
    0xe269, 0x4d3d, 0xe2ae, 0x8afa, 0x556c, 0x3b1c, 0xa694, 0xf600, 0x60c3, 0xc059, 0x5e6d, 0x8158, 0x4c8b, 0x4513, 0x44d8, 0x9e18,
    0xf319, 0x2cfd, 0x30ff, 0xfe32, 0xdaa9, 0x0468, 0x2c44, 0x8946, 0xdacd, 0x600c, 0x0f96, 0x69ff, 0x6536, 0x608b, 0x8811, 0x9c91,
    0x5886, 0x0c89, 0x45fd, 0xaa36, 0x98d6, 0x5bed, 0x54ff, 0xb984, 0x19c2, 0x5b2a, 0x9338, 0x0e46, 0xa824, 0xa8d2, 0x5e24, 0xc811,
    0x9e7d, 0x967c, 0x1f25, 0xdaf7, 0x5a36, 0x9e2f, 0xc42e, 0x6d36, 0xe8d3, 0x5dc9, 0x16e1, 0x8760, 0x1289, 0xab24, 0x9bcf, 0x71e9,
    0xfbc3, 0x7e7f, 0x923c, 0x1b49, 0xf2b7, 0x9358, 0x6e26, 0xcbde, 0x62af, 0x8e23, 0xc899, 0x16f5, 0x9374, 0x420a, 0x2af0, 0x5bc8,
    0x71da, 0xc8f0, 0x7f9c, 0x60d4, 0xd74e, 0x3ef0, 0x1f5f, 0xa08d, 0x8923, 0xbfa8, 0x53d4, 0xe59e, 0xcdfb, 0x21b0, 0xa0cd, 0xc963,
    0xfd04, 0xdf82, 0x7a64, 0xcd0b, 0xd140, 0x56c4, 0xa0a9, 0xad07, 0xded6, 0x3f3b, 0xc59f, 0xcd8c, 0x56c7, 0xa3aa, 0x9d19, 0xc105,
    0x133a, 0x099c, 0x05cf, 0x9ae8, 0x47c5, 0xb018, 0x1c0d, 0xc1c2, 0xd4fd, 0xbe5e, 0xb429, 0x6910, 0x8ad9, 0x764f, 0x2a54, 0xff6c,
    0x95fc, 0xacb8, 0x7062, 0x6143, 0x51d2, 0xc18e, 0x98b1, 0x3c8a, 0x4733, 0x46ee, 0x8a38, 0x97ae, 0xdcfc, 0x3707, 0x71fb, 0xe9d1,
    0x4ec0, 0x2c4e, 0x834c, 0x7a89, 0x20e6, 0xe790, 0xe1e3, 0xf4aa, 0xe87f, 0xf165, 0x7297, 0xb6a0, 0xc28f, 0xaaad, 0x034d, 0x7e50,
    0xbd13, 0xca79, 0xd403, 0x40a0, 0xa24c, 0x6af4, 0x5d20, 0xff08, 0xf198, 0x8f6a, 0x90db, 0xdeb8, 0x5155, 0x4609, 0x6ddf, 0x013a,
    0x2b31, 0x8b02, 0xbc9f, 0x57fe, 0x8b98, 0x2605, 0x6249, 0x68c5, 0x4e07, 0xeb89, 0x348e, 0xcb6f, 0xd31e, 0x2a8c, 0x27b4, 0xc2f3,
    0xd6d1, 0xb064, 0x6071, 0x72eb, 0xcadc, 0x71a6, 0xb48c, 0xccb5, 0x7ef5, 0x18b6, 0x3e55, 0xbafa, 0x54a1, 0xe7da, 0xaba9, 0x1642,
    0x24c3, 0x8699, 0xfa7b, 0xd7cc, 0xbc72, 0xba13, 0xbd48, 0x9122, 0x364a, 0x2dbd, 0x61b4, 0xa625, 0x47b1, 0xc46c, 0x2f74, 0x8a6b,
    0xc4fd, 0xbee5, 0x0f92, 0x6dfb, 0x251e, 0x4a4f, 0xe7ed, 0x9c9e, 0x5789, 0xfcef, 0x2562, 0x3633, 0x54c4, 0x82bf, 0x9871, 0xfc4a,
    0x80c7, 0xc21f, 0x3a3d, 0x96be, 0xdde7, 0x3d17, 0xcba5, 0x19d4, 0x4d3c, 0xe3af, 0x9af0, 0x5fdd, 0x20e3, 0xe295, 0xb1c1, 0xd4df,
    0x9c7c, 0xb56b, 0x3a59, 0xf2da, 0xfe35, 0xddae, 0x745e, 0x1953, 0xcabb, 0x16c1, 0xa740, 0x33df, 0xed0f, 0xd432, 0x7191, 0x83bb,
    0x8d7e, 0xa6d9, 0xbb4d, 0xf21d, 0x39f2, 0x6a6c, 0xc5b8, 0xeaab, 0x07a7, 0xd096, 0x9119, 0x0d71, 0xac0e, 0xc6d4, 0xb5da, 0x8be8,
    0x5675, 0x1118, 0x09a8, 0x31fb, 0xeb3d, 0x803a, 0x3fe2, 0x1c46, 0x8a89, 0x261f, 0x7853, 0xd82a, 0xa5fd, 0xac74, 0xbcae, 0x66cf,
    0xaa6f, 0xc18f, 0x99b0, 0x2c80, 0x4d82, 0x5d11, 0xce39, 0xd06f, 0x68e0, 0x6b22, 0x9afd, 0x52d0, 0xf091, 0x9768, 0x1a3a, 0x90cf,
    0xcaac, 0x01d6, 0xc7dd, 0xadd8, 0x0109, 0x1802, 0x8ae1, 0x4e77, 0x9bf9, 0x47df, 0xaa02, 0xace2, 0x2a38, 0x9300, 0x367e, 0x1989,
    0x1061, 0x61da, 0xc84b, 0xc427, 0x643f, 0x7889, 0x02f0, 0xd2e6, 0xc37f, 0x4b56, 0xefff, 0x06d4, 0xb2ee, 0xc8ed, 0x6281, 0xa00d,
    0x09a3, 0x3af0, 0x5b73, 0xca61, 0xcc1b, 0xd05b, 0x5cd4, 0x1af7, 0x5d02, 0xdd2a, 0xf0da, 0xdc23, 0xe8d8, 0x56c2, 0xa6af, 0xcd3b,
    0xe170, 0x6739, 0x4d92, 0x4d01, 0xde92, 0x7b7f, 0xc71b, 0x6b1e, 0xa6c1, 0xa355, 0x62e6, 0xc76a, 0x1a6f, 0xc59a, 0xc889, 0x06e5,
    0x83df, 0xe91a, 0x850b, 0x5bf4, 0x4de6, 0x3975, 0xedeb, 0x30d6, 0xd71b, 0x6ba5, 0x1d7a, 0xa7be, 0xcd21, 0xfb6a, 0xd7d6, 0xa668,
    0x0afc, 0x56b2, 0xd6df, 0xbe6a, 0x801d, 0x18c5, 0x4d26, 0xf9b5, 0x2a1f, 0xb427, 0x671e, 0x6ab5, 0x1c61, 0xadae, 0x777f, 0x0b6f,
    0xd42a, 0x6989, 0x1340, 0x73e6, 0xd6da, 0xbb6f, 0xd03f, 0x38b0, 0x3925, 0xbdbb, 0x62d1, 0xf05d, 0x5ba4, 0x1db6, 0x6b72, 0xcaad,
    0x00d7, 0xd7d7, 0xa769, 0x1af6, 0x5c03, 0xcd20, 0xfa6b, 0xc7dc, 0xacd9, 0x1103, 0x12b3, 0x911e, 0x0a76, 0xdc38, 0xf3c3, 0xf627,
    0x47e4, 0x9139, 0x2d51, 0x8d58, 0x80ff, 0xfa27, 0x8b90, 0x2e0d, 0xe219, 0x3d4d, 0x91ff, 0xeb97, 0x2a90, 0x3ba8, 0x1220, 0x028d,
    0xaf9b, 0x605c, 0x5fc6, 0x3bf8, 0x4270, 0x508a, 0x88dd, 0x505d, 0x5f0a, 0xf734, 0x45fc, 0xab37, 0x88dc, 0x515c, 0x4f00, 0xfd85,
    0x5e03, 0xef36, 0xcf1d, 0xe540, 0x1325, 0x1683, 0xe502, 0x5167, 0x743b, 0x7c36, 0xf963, 0xfcc9, 0x0344, 0x7759, 0x2d49, 0x9540,
    0x1004, 0x04bf, 0xfb93, 0x2e2f, 0xc03b, 0x3c0f, 0xc2b6, 0x9394, 0xa2ea, 0xcc52, 0x9912, 0x8e22, 0xc998, 0x06ff, 0x99c5, 0x59f5,
    0x6ef1, 0x1c09, 0xc5c6, 0x94d5, 0x949a, 0xdbd5, 0x691f, 0x85d6, 0x8629, 0x4acb, 0x6369, 0x59ee, 0x75ea, 0xbcec, 0x248d, 0xc8d7,
    0x58bb, 0x31b4, 0xa472, 0x32f0, 0xd32b, 0x1fb9, 0x466b, 0x0fbd, 0x42d4, 0xf42e, 0x6cfb, 0x3415, 0x50f4, 0xf6a3, 0xc360, 0x5449,
    0x0f32, 0xcd5b, 0x8110, 0x04c3, 0x87ef, 0x9d06, 0xde1a, 0xf3f7, 0xc213, 0x3631, 0x56c6, 0xa2ab, 0x8d13, 0xcbb4, 0x08c5, 0x4d9d,
    0x420e, 0x2ef4, 0x1be0, 0x5b1e, 0xa70c, 0x7f93, 0x6fdb, 0x2728, 0x5e6f, 0x835a, 0x6c9f, 0x5071, 0x7326, 0x161a, 0x7c9b, 0x54ce,
    0x88b5, 0x3835, 0xbca0, 0x68c1, 0x4a03, 0xaba1, 0x1e4a, 0xa493, 0xd311, 0x2583, 0xd7d2, 0xa26c, 0x4ad4, 0x7c76, 0xb923, 0xbe65,
    0x8f12, 0xe8a3, 0x2db9, 0x65b0, 0xe60d, 0x6d75, 0xab90, 0x2f7b, 0x8564, 0x349b, 0xde7a, 0x9397, 0xa1e9, 0xfc4c, 0x86c1, 0xa223,
    0x059b, 0xcebc, 0x55ea, 0xbd9a, 0x43f0, 0xc101, 0x173e, 0x49b4, 0x2f0b, 0xf514, 0x47ca, 0xbf17, 0xec6b, 0xa15d, 0x48f8, 0x724c,
    0x6d7b, 0xa59e, 0xcf17, 0xef4a, 0xb361, 0x5669, 0x0d04, 0xd97b, 0xe5a7, 0xf4c2, 0x8017, 0x12cf, 0xed62, 0xb95f, 0xc219, 0x3c3b,
    0xf682, 0xe241, 0x6515, 0x43a8, 0x9959, 0xc569, 0x3b7a, 0xc0f2, 0xf5c6, 0x9518, 0x485c, 0xd6e8, 0x895d, 0xc1d6, 0xc0e9, 0xeedd,
    0x35fd, 0xa917, 0x8aea, 0x457c, 0x2bb7, 0x0d84, 0x59fb, 0x60ff, 0xfc65, 0xafe8, 0x132f, 0x1c89, 0x4546, 0x118d, 0x9c3d, 0xf42a,
    0x68ff, 0x743d, 0x7a30, 0x995f, 0xc36f, 0x5b46, 0xff54, 0xadc4, 0x1d15, 0xc8d1, 0x5ebd, 0x5188, 0x9bd4, 0x6af2, 0x5b26, 0x9f34,
    0xce3e, 0xd768, 0x18d6, 0x5e35, 0xd900, 0x9edc, 0x37dd, 0xab21, 0x9eca, 0x21cb, 0xdbb6, 0x0a7c, 0xd632, 0x5387, 0xb6cd, 0xafe2,
    0x1925, 0xbccd, 0x05ac, 0xf98b, 0x1421, 0x65b6, 0xe00b, 0x0d49, 0x9436, 0x7779, 0x0d69, 0xb416, 0x562f, 0x4b42, 0xfbeb, 0x5657,
    0x333a, 0x08ea, 0x62b2, 0x933e, 0x0840, 0xc818, 0x9774, 0x0626, 0x401c, 0x1ef0, 0x1e29, 0xc7f0, 0x80f5, 0xf02d, 0x2bd4, 0x6ee7,
    0x0a1f, 0xb551, 0x0063, 0x6363, 0x53e4, 0xd5ae, 0xfc06, 0xcc8b, 0x40cb, 0xc927, 0xb940, 0xdd06, 0xdcf6, 0x3d0d, 0xd1bf, 0xa93b,
    0xa6c6, 0xa452, 0x12d0, 0xf27d, 0x5992, 0x0996, 0x0fc5, 0x3aac, 0x072f, 0x581e, 0x9411, 0x505e, 0x5c09, 0xc72a, 0x5a2f, 0x8736,
    0x44df, 0x991f, 0x832f, 0x19ea, 0x7302, 0x323e, 0x1de5, 0x3821, 0xa8b4, 0x3842, 0xcbd7, 0x6ba6, 0x1e79, 0x97a0, 0xd2f2, 0xd76b,
    0x1bd5, 0x6e2b, 0xc6d3, 0xb2dd, 0xfbde, 0x6362, 0x52e5, 0xc5a4, 0xf6b7, 0xd774, 0x04ca, 0x8ee6, 0x0d5c, 0x8123, 0x37f0, 0x860c,
    0x6fee, 0x121d, 0x3fb0, 0x4e14, 0xf89a, 0x143b, 0x7fac, 0x50e4, 0xe6b3, 0xd3cb, 0xff59, 0xa0c9, 0xcd67, 0xbd2c, 0xf546, 0x1598,
    0xcd04, 0xde4f, 0xa6a2, 0xc036, 0x3102, 0x12c4, 0xe669, 0x0911, 0x8842, 0xcfc2, 0x3a9f, 0x341c, 0x59fd, 0x66f9, 0x9c59, 0x904e,
    0x4b2d, 0x9484, 0xc5cb, 0x99d8, 0x44e8, 0xae28, 0xc2e4, 0xc1c6, 0xd0f9, 0xfe76, 0x9eed, 0x06ec, 0x8ad6, 0x7940, 0xda32, 0x9ff3,
    0x09f9, 0x60aa, 0xa930, 0xadcd, 0x141c, 0x588b, 0x0184, 0x958f, 0xdfcb, 0x332d, 0x1ffd, 0x022f, 0x0d39, 0xe446, 0x0428, 0x6c04,
    0xcbea, 0x569b, 0xfff6, 0x0f66, 0x990f, 0x933f, 0x0941, 0xd812, 0x9dc5, 0x1dd9, 0x041d, 0x5931, 0xaa35, 0x9bd5, 0x6bf3, 0x4b2c,
    0x9585, 0xd5c1, 0x9369, 0x5f17, 0xea29, 0x8525, 0x75da, 0x8cdc, 0x1570, 0x25ec, 0xb8bd, 0x31f0, 0xe036, 0x3074, 0x75b9, 0xefbf,
    0x4694, 0xf042, 0x44bb, 0xfd7b, 0xa0fd, 0xf953, 0xccf9, 0x32b9, 0x9a62, 0xcd4f, 0x9504, 0x5440, 0x063b, 0x5d01, 0xde29, 0xc0c4,
    0xc3f0, 0xc4d9, 0x9ac1, 0x6eec, 0x0114, 0x051f, 0x4a38, 0x909a, 0x9ff9, 0x03f3, 0xc0ee, 0xe9da, 0x45cb, 0x9c00, 0xc917, 0x8970,
    0xecfb, 0x31cd, 0xdd0b, 0xd1fb, 0xed7f, 0xa442, 0x02c0, 0xe2d6, 0xf282, 0xa66d, 0x0ff9, 0x0690, 0xf6aa, 0xca69, 0xc413, 0x500b,
    0x095c, 0xc50f, 0x5d1c, 0xc334, 0x001d, 0x1d1d, 0xc0d9, 0xdeed, 0x0400, 0x442c, 0x6aec, 0x4538, 0x6ff3, 0x0f00, 0xff69, 0x90f9,
    0xfc9a, 0x5017, 0x1540, 0x15dc, 0x8940, 0xdccb, 0x0030, 0x3030, 0x31fd, 0xed3b, 0xe006, 0x0044, 0x4444, 0x0284, 0xa692, 0xf006,
    0x00ff, 0xffff, 0x066f, 0x0955, 0xcc06, 0xcd46, 0x9c0d, 0xc41a, 0x5902, 0x9906, 0x9a36, 0x991b, 0x872b, 0x59c2, 0x59c6, 0x5dc2,
    0x1dea, 0x372e, 0x58d2, 0x58dd, 0x57d2, 0xa7b4, 0xc72b, 0x5b2e, 0x973c, 0x4e6e, 0x82e0, 0xc72e, 0x5e2b, 0xc71e, 0x6e1b, 0xf6e3,
    0x8320, 0x16e5, 0x8364, 0x52a1, 0x81e0, 0xf433, 0x71e6, 0xf4cc, 0x8e19, 0xf2a3, 0x874c, 0x3ea5, 0x4a0a, 0xa2a8, 0x8e10, 0xfbaa,
    0x1716, 0x619c, 0x8e0d, 0xe6b7, 0xd7cf, 0xbf71, 0x8a0d, 0xa29b, 0xbd23, 0xfa49, 0xe5fe, 0xad9b, 0x424a, 0x6ab0, 0x1964, 0xfd8c,
    0x570a, 0x7f6c, 0x9024, 0x2147, 0x573a, 0x4f5c, 0xa1d9, 0xcc7c, 0xb73c, 0x4f18, 0xe59d, 0xcef8, 0x11ae, 0xbf1e, 0xe562, 0x3107,
    0x17c1, 0xb64b, 0x2964, 0xfc41, 0x8bcc, 0x7251, 0x7066, 0x6547, 0x11fa, 0xeb4a, 0xf74d, 0x3c85, 0x483c, 0xb688, 0xeaa7, 0x0bab,
    0x10ee, 0xee55, 0xbd75, 0xac1f, 0xd7c5, 0xb57b, 0x2a49, 0xe271, 0x5525, 0x7255, 0x7462, 0x256f, 0x3b3e, 0x84b6, 0xf742, 0x338a,
    0xb85a, 0xd617, 0x76a2, 0xc7b9, 0xc9bc, 0x22db, 0xf8bb, 0x351a, 0x4ef0, 0x1c7e, 0xb2b1, 0x97b2, 0xc0e0, 0xe7d4, 0xa5a7, 0xf62e,
    0x4eed, 0x0163, 0x7268, 0x495f, 0xc4e0, 0xa3f8, 0xcf4b, 0xb316, 0x211e, 0x0e63, 0x8d01, 0xd9a6, 0x387a, 0xf3ef, 0xda0b, 0xa6ca,
    0xa85e, 0xd2a8, 0x8d31, 0xe996, 0x0987, 0x1ed4, 0x3a0d, 0xa68e, 0xec1a, 0xd02c, 0x2ba3, 0x1990, 0x0978, 0xe12b, 0x3c62, 0xafdb,
    0x201c, 0x1d6a, 0xb7ae, 0xdd8a, 0x507a, 0x782d, 0xa654, 0x36c0, 0xa737, 0x44a8, 0xee68, 0x8048, 0x4d90, 0x4f03, 0xfe86, 0x6e1d,
    0xf0e5, 0xe31c, 0x2943, 0xdb66, 0xdaac, 0x016d, 0x7c66, 0xa933, 0xaece, 0x2402, 0x4758, 0x2d85, 0x598c, 0x1788, 0xff02, 0xfb92,
    0x2f2e, 0xd031, 0x36be, 0xd949, 0xd795, 0xe52b, 0x784e, 0xc537, 0x6524, 0x7299, 0xb8ae, 0x22e3, 0xc083, 0x84b7, 0xf643, 0x2380,
    0xb2eb, 0xcde8, 0x32a3, 0x8078, 0x7da0, 0x7efe, 0x13bd, 0x8e1b, 0xf0a1, 0xa758, 0x2bc7, 0x7df4, 0x2aaa, 0x0192, 0x8399, 0xaf5c,
    0xa79b, 0xe804, 0x8a1e, 0xb188, 0x9d96, 0x4e8a, 0x6604, 0x61a4, 0xb635, 0x571a, 0x6f7c, 0x808f, 0x8a57, 0xf8c1, 0x4f60, 0x9de5,
    0x3df9, 0x254b, 0x1f1a, 0xe5c8, 0x9bad, 0x138b, 0xb82d, 0xa160, 0x75c5, 0x93c3, 0xf5bd, 0xee63, 0x8b43, 0xfdde, 0x0558, 0x0d7f,
    0xa200, 0x26b8, 0xdff4, 0x0c12, 0xde66, 0x8f8b, 0x713a, 0x2810, 0x993e, 0xa20e, 0x28b6, 0x3f98, 0x663c, 0x599c, 0x0798, 0xefa9,
    0x5082, 0x80d5, 0xd00d, 0x0a82, 0x28cc, 0x45e2, 0xb529, 0x781b, 0x9062, 0x6701, 0x75aa, 0xfcac, 0x6621, 0x4481, 0xc741, 0x3144,
    0x5482, 0xc4f9, 0xbae1, 0x4fba, 0x473f, 0x4ae2, 0x4a40, 0xe8e2, 0x6cf8, 0x3716, 0x60ea, 0xe970, 0xef61, 0x984a, 0xc771, 0x0174,
    0x657f, 0x29c2, 0x5ae7, 0x4ffe, 0x037b, 0x4866, 0xecd2, 0x18e4, 0x6c07, 0xc8e9, 0x6685, 0xe025, 0x2367, 0x550c, 0x5b7c, 0xc56e,
    0x3c7d, 0xb0c4, 0xc0d1, 0xd6e5, 0x8450, 0x11a4, 0xb514, 0x4526, 0x71ed, 0xffc7, 0x3e57, 0xb8f8, 0x74b5, 0xf2b8, 0x9c57, 0x9e40,
    0xab41, 0xfeaa, 0x4231, 0x11cb, 0xda7b, 0xd6ba, 0xdb0f, 0xb3c5, 0xf2cd, 0xe922, 0xbd33, 0xea59, 0xf555, 0x068b, 0xedb1, 0x6a8c,
    0x2558, 0x0c09, 0xc57d, 0x2f6e, 0x9071, 0x7412, 0x551f, 0x486f, 0xe5db, 0x88be, 0x333e, 0x0cee, 0x229a, 0xb9fa, 0x67bc, 0xc817,
    0x987b, 0xf640, 0x2083, 0x82f5, 0xd23b, 0x1ea2, 0x4c7b, 0xb5e3, 0xb2d1, 0xf7d2, 0xa31a, 0x2da9, 0x75a0, 0xf6a6, 0xc665, 0x046b,
    0x2f47, 0xb958, 0xc51e, 0x4c0d, 0xc395, 0xa1bc, 0xa919, 0x84e4, 0xa510, 0x4199, 0x8a7e, 0xd1e8, 0xfe6c, 0x84f7, 0xb603, 0x612c,
    0x3ebd, 0x5212, 0x3253, 0x7088, 0x8ba9, 0x1734, 0x43be, 0x8f4f, 0xb5fe, 0xafcc, 0x370b, 0x7df7, 0x29a9, 0x318c, 0x9c4a, 0x835d,
    0x6b98, 0x2047, 0x4631, 0x55e7, 0xb097, 0x9382, 0xb4fc, 0xbcc5, 0x0da4, 0x79db, 0x41a9, 0xba4e, 0xe015, 0x1357, 0x64f1, 0xb647,
    0x2568, 0x3c39, 0xf480, 0xc255, 0x7077, 0x7456, 0x115b, 0x4aeb, 0x4349, 0x78b8, 0x33c1, 0xf311, 0x24f5, 0xb0af, 0xabba, 0x0551,
    0x0476, 0x325a, 0x7981, 0x1bf3, 0x480d, 0x87b9, 0xcb50, 0xec21, 0xeb17, 0xaa10, 0xbef0, 0x1a87, 0x2d72, 0xae7b, 0x91b7, 0xa3df,
    0xe86c, 0xe276, 0x5222, 0x0263, 0x4175, 0x6692, 0xf732, 0x43fa, 0xcb0b, 0xb77a, 0x095e, 0xc70d, 0x7d08, 0xd656, 0x37e3, 0x951f,
    0x4f5b, 0xa6de, 0xbc4a, 0x822b, 0x0ce5, 0x2991, 0x09b4, 0x2de7, 0x3bee, 0x5466, 0x201d, 0x1c6b, 0xa7a4, 0xd73b, 0x4b85, 0x3c2c,
    0xe195, 0x82dc, 0xfb12, 0xafae, 0x5569, 0x3e19, 0xf6b6, 0xd675, 0x14c0, 0x8457, 0x16a3, 0xc522, 0x7031, 0x3210, 0x33cb, 0xf91b,
    0x84b1, 0xf045, 0x43bc, 0x8d4d, 0x95ea, 0xbaae, 0x00f5, 0xf5f5, 0xa62b, 0x49bf, 0x2400, 0x455a, 0x0d91, 0x4cee, 0x2076, 0x7700,
    0x7410, 0x571d, 0x687b, 0xf0b9, 0xbf40, 0xbb3c, 0x836c, 0x5aa9, 0x01b0, 0xa1bb, 0xae1e, 0xf4d2, 0x9007, 0x0264, 0x4672, 0x16a4,
    0xc225, 0x0007, 0x0707, 0x7036, 0x3517, 0x43fd, 0xcc0c, 0xc74c, 0x3c49, 0x84f0, 0xb104, 0x111a, 0x0baa, 0x11ef, 0xfe5f, 0xb7c4,
    0xb7e0, 0x93c4, 0xf2ba, 0x9e55, 0xbe54, 0xbe23, 0xc954, 0xca33, 0x9e49, 0xa248, 0x6ef0, 0x1d08, 0xd5cc, 0x9e64, 0x8f65, 0x9fd4,
    0x2ede, 0x31ca, 0xda0c, 0xa1cd, 0xd868, 0xe7bf, 0xcecc, 0x259a, 0xcecb, 0x229d, 0xbefd, 0x178a, 0xfd00, 0xdb86, 0x3a4c, 0xe7cf,
    0xbebc, 0x56cb, 0xafa6, 0x5d61, 0xbe49, 0xa33e, 0x098d, 0x14de, 0x9a49, 0xe664, 0x041c, 0x5830, 0xba3f, 0x9164, 0x700c, 0x0f2d,
    0xd244, 0x61dd, 0xcf4c, 0xb411, 0x5128, 0x3b74, 0xcefc, 0x15aa, 0xff36, 0xcfa6, 0x5efb, 0x17ce, 0xb944, 0xd902, 0x9cde, 0x17c9,
    0xbe43, 0xa934, 0xa9c9, 0x5434, 0x724f, 0x6e78, 0x9580, 0xd0c4, 0xc34b, 0x7f62, 0x9e2a, 0xc12b, 0x3d14, 0xc8a6, 0x29ca, 0x52ef,
    0xcfae, 0x56f3, 0x979e, 0xeccc, 0x06fa, 0x9cc0, 0x09d7, 0x4e84, 0x680a, 0x81c8, 0xdc1b, 0xd0e0, 0xe76f, 0x1e1c, 0xf2c5, 0xe12a,
    0x3d63, 0xbfd1, 0x2aad, 0x0695, 0xf3af, 0x9a4b, 0xe466, 0x2408, 0x4d52, 0x8dc1, 0x1966, 0xff8e, 0x771e, 0x6a0e, 0xa7da, 0xa945,
    0xd8b8, 0x376f, 0x1993, 0x0a7b, 0xd135, 0x23b1, 0x83da, 0xec1f, 0xd529, 0x7b81, 0x39e5, 0x7d7b, 0xa525, 0x74ac, 0xeba1, 0x1ca6,
    0x6a69, 0xc0bd, 0xba89, 0x27d2, 0xa495, 0xd517, 0x45bf, 0xe874, 0xfa6e, 0xc2d9, 0xfcfb, 0x3176, 0x66b0, 0xd510, 0x42b8, 0x9842,
    0xcf79, 0x8124, 0x30f7, 0xf63a, 0x5af9, 0x51e0, 0xf3bc, 0x8958, 0xc4d3, 0x90cb, 0xcea8, 0x41fe, 0xed19, 0xc224, 0x0106, 0x170d,
    0x7a87, 0x2ee8, 0x07fc, 0x8bcd, 0x7350, 0x606c, 0x6ff6, 0x0a05, 0xaf4b, 0xb08c, 0x8899, 0x1419, 0x5d8e, 0x51a6, 0xb5fa, 0xabc8,
    0x7723, 0x5733, 0x4655, 0x3183, 0x9345, 0x733b, 0x0b07, 0xbc42, 0x8a23, 0x8cb5, 0x7c19, 0xd64c, 0x2df9, 0x25f0, 0xa4a1, 0xe123,
    0x346a, 0x2f8b, 0x7594, 0xc292, 0xb7b0, 0xc394, 0xa0bd, 0xb913, 0x8e55, 0xbeef, 0x0598, 0xcdbf, 0x65f4, 0xa249, 0x6ff1, 0x0d02,
    0xdf7d, 0x859b, 0xcb64, 0xd815, 0x9ac2, 0x6def, 0x310a, 0x1acc, 0x6639, 0x5c99, 0x57ba, 0xcfdc, 0x2481, 0xc4db, 0x98c3, 0x4ef8,
    0x1476, 0x32e1, 0xc23a, 0x1f18, 0xe7ca, 0xbbb9, 0x06e9, 0x8fd3, 0x2962, 0xfa47, 0xebf0, 0x4df7, 0x2864, 0xed4a, 0x9177, 0x631f,
    0x2f98, 0x6687, 0xe227, 0x0373, 0x406e, 0x6c82, 0x4d6c, 0xb3ff, 0xc8f7, 0x789b, 0x10e2, 0xe259, 0x7d0d, 0xd353, 0x67c1, 0xb56a,
    0x3b58, 0xe2d0, 0xf484, 0xc651, 0x305f, 0x5e92, 0x7ea7, 0x4ae4, 0x4c46, 0x88de, 0x535e, 0x6f14, 0xe8e7, 0x69fd, 0x6734, 0x409f,
    0x9d73, 0xab6f, 0xd084, 0x830b, 0x3dce, 0x127c, 0x5ed1, 0x3de4, 0x3856, 0xdfc3, 0x3b25, 0x9fad, 0x57a7, 0xd2c1, 0xe458, 0x1a36,
    0x9cc3, 0x0ad4, 0x7e9a, 0x77d9, 0xadc9, 0x1018, 0x18a3, 0x2b40, 0xfa73, 0xdfc4, 0x3c22, 0xef9b, 0x62b0, 0x913c, 0x2854, 0xdd7a,
    0xa08a, 0x8e24, 0xcf9e, 0x66c3, 0xa663, 0x01f7, 0xe6fc, 0x9c84, 0x4d93, 0x4c00, 0xce98, 0x71ce, 0xdce4, 0x2f1f, 0xe100, 0x1749,
    0x3ec3, 0x2c6c, 0xa16e, 0x7bcb, 0x73af, 0x9f93, 0x6999, 0x0350, 0x634d, 0x7dca, 0x1494, 0xd003, 0x048c, 0xc8a0, 0x2fcc, 0x32d3,
    0xf008, 0x0ef1, 0x1f93, 0x6c41, 0x8eaf, 0x4415, 0x53d5, 0xe49f, 0xddf1, 0x2b01, 0xbb32, 0x8d62, 0xbac5, 0x6b9e, 0x2641, 0x260d,
    0x6a41, 0xe895, 0x1b8f, 0x3471, 0x3490, 0xd571, 0x23d9, 0xebb2, 0x0fb5, 0x4adc, 0x747e, 0x3973, 0xebed, 0x50ea, 0xe8bd, 0x33a7,
    0x9577, 0x2733, 0x4574, 0x23bf, 0x8dd4, 0x0c73, 0xbf07, 0xfc7b, 0xb1f6, 0xe3e8, 0xddb7, 0x6d47, 0x99a2, 0x3e92, 0x7d3d, 0xe363,
    0x563c, 0x5851, 0xdb5e, 0xe294, 0xb0c0, 0xc4d5, 0x96cd, 0xae94, 0x7e58, 0xb51b, 0x4a29, 0x818b, 0x9f58, 0xa252, 0x74ea, 0xade7,
    0x3e36, 0xd999, 0x0745, 0x3274, 0x57af, 0xdac9, 0x6408, 0x4fbe, 0x433b, 0x0aca, 0x6084, 0x871e, 0x6cf7, 0x3819, 0x908c, 0x89ef,
    0x7364, 0x5458, 0x1e23, 0xcdfa, 0x20b1, 0xb0c7, 0xc3d2, 0xe6fb, 0x9b83, 0x3da5, 0x7917, 0x8d65, 0xbdc2, 0x1ba8, 0x1356, 0x65f0,
    0xa64d, 0x2fd9, 0x27c6, 0xb081, 0x8594, 0xc46b, 0x2873, 0xfa5d, 0xf1ea, 0xfd18, 0xc39e, 0xaab7, 0x1957, 0xcebf, 0x56e9, 0x8d84,
    0x5c23, 0xed00, 0xdb3d, 0x81f7, 0xe324, 0x117b, 0x6acb, 0x621f, 0x3e93, 0x7c3c, 0xf369, 0x5c8d, 0x43ae, 0x9f5f, 0xa555, 0x04dc,
    0x98f0, 0x7dcb, 0x1595, 0xc009, 0x0e3d, 0xd35f, 0x6bcd, 0x7512, 0x4414, 0x52d4, 0xf495, 0xd740, 0x30fe, 0xff33, 0xcaa3, 0x0ed9,
    0x37bb, 0xcd47, 0x9d0c, 0xd410, 0x53b3, 0x82f9, 0xde37, 0xdeda, 0x3337, 0x05e7, 0xb2c0, 0xe6c3, 0xa3bb, 0x8c08, 0xc1a4, 0xb29b,
    0xbd98, 0x41f2, 0xe115, 0x025c, 0x7e4a, 0xa709, 0x7a96, 0x3ff9, 0x075d, 0x2a6c, 0xc754, 0x2451, 0x140b, 0x4f9c, 0x6119, 0x0b88,
    0x33cd, 0xff1d, 0xe48d, 0xcfe3, 0x1bbe, 0x0540, 0x1567, 0x32fb, 0xd820, 0xaff7, 0x0c30, 0xfc44, 0x8ec9, 0x2273, 0x5013, 0x1144,
    0x55f4, 0xa384, 0xb337, 0x003f, 0x3f3f, 0xc19b, 0x8da4, 0x7c03, 0xcc56, 0x9d16, 0xce0a, 0xe35c, 0x6903, 0x99ca, 0x56fa, 0x9e97,
    0x7c96, 0x59c3, 0x58c7, 0x4dc8, 0x175b, 0x2cd1, 0x1cd3, 0x1f1c, 0xe3ce, 0xfb91, 0x2c2d, 0xe02f, 0x296d, 0xf548, 0x1b96, 0x2d68,
    0xb461, 0x2158, 0x4825, 0xaf91, 0x6a56, 0xff82, 0x7b12, 0xaa76, 0xd896, 0x1941, 0xd8a9, 0x267e, 0x1932, 0xabda, 0x6531, 0x678c,
    0xf827, 0xa986, 0x1b7b, 0xc085, 0x82b1, 0x967f, 0x1c26, 0xeae9, 0x45e5, 0xb22e, 0x082d, 0xa575, 0x24fc, 0xb9a6, 0x3be0, 0x5a68,
    0xc071, 0x7645, 0x205e, 0x5f28, 0xd516, 0x44be, 0xf87e, 0xf0df, 0xd926, 0xb8fa, 0x76b7, 0xd2ac, 0x8935, 0xa9be, 0x2343, 0x7128,
    0x3a02, 0xa981, 0x1c7c, 0xb0b3, 0xb7a6, 0xd582, 0xd02a, 0x2da5, 0x79ac, 0x36de, 0xb929, 0xb46f, 0x2f56, 0xa849, 0xc5bf, 0xedac,
    0x7791, 0xe581, 0xd2e4, 0xc17d, 0x6b42, 0xfa9d, 0x312a, 0x3aec, 0x476f, 0x1ab2, 0x1847, 0xcfa4, 0x5cf9, 0x37da, 0xac26, 0xeefc,
    0x14dc, 0x984b, 0xc670, 0x117e, 0x6fce, 0x323d, 0x1ee6, 0x083f, 0xb767, 0x1443, 0x07d4, 0xa3e5, 0xd256, 0x73cf, 0xfff3, 0x0a63,
    0xc92d, 0xb34a, 0x7d42, 0x9c1c, 0xd50b, 0x59a3, 0x38a7, 0x2e32, 0xdd26, 0xfcd6, 0x1c5b, 0x9794, 0xe6c6, 0xa6be, 0xdc2a, 0xe1d1,
    0xc698, 0xf996, 0x093c, 0xa56f, 0x3ee6, 0x0949, 0xd01a, 0x1d95, 0x4851, 0xdbe5, 0x592f, 0xb42b, 0x6b12, 0xaacd, 0x632d, 0x1daa,
    0x776e, 0x1a7e, 0xd48b, 0xc828, 0xa744, 0x37db, 0xad27, 0xfef6, 0x1e6d, 0x83b4, 0x8271, 0x56bf, 0xdbd2, 0x6e18, 0xf5e0, 0xb33e,
    0x0936, 0xaf65, 0x9ea2, 0x49a3, 0x381c, 0x9589, 0xd9cd, 0x5311, 0x205b, 0x5a2d, 0x8534, 0x64cb, 0x8c7d, 0xb4d1, 0x91e8, 0xfc80,
    0x4a0d, 0xa5af, 0xfe26, 0xcebd, 0x54eb, 0xad90, 0x4941, 0xdafe, 0x533f, 0x0e75, 0x9b17, 0xa931, 0xaccc, 0x0416, 0x523a, 0x1a7b,
    0xd18e, 0x980a, 0x8731, 0x43d8, 0xe929, 0xb638, 0x5a17, 0xbf0e, 0xf572, 0x21ac, 0xbcd1, 0x19b0, 0x2958, 0xc07d, 0x7a49, 0xe026,
    0x2064, 0x6512, 0x44af, 0xe96f, 0xf07e, 0x7887, 0x0cfe, 0x328a, 0xa951, 0xccac, 0x67ec, 0x9847, 0xca7c, 0xd106, 0x1082, 0x8239,
    0x1ef7, 0x192e, 0xb7c6, 0xb5e2, 0xb3d0, 0xe7d8, 0xa9ab, 0x3656, 0x31a1, 0xb167, 0x7279, 0x584e, 0xc441, 0x0259, 0x7b4f, 0xf72b,
    0x5ae3, 0x4bfa, 0x4353, 0x62a2, 0x832e, 0x18eb, 0x6308, 0x388f, 0x061a, 0x7c20, 0xef75, 0x8c5e, 0x97f2, 0x80a0, 0xa578, 0x29f1,
    0x69d4, 0x4e1d, 0xf193, 0x8461, 0x2095, 0x94e3, 0xa2ac, 0x8a14, 0xbb82, 0x3dd2, 0x0e60, 0x8e02, 0xe9b8, 0x27a9, 0xdfee, 0x1608,
    0x6e89, 0x6471, 0x36c7, 0xa030, 0x349e, 0xdb7f, 0xc3b5, 0x819c, 0x884f, 0xc2cf, 0xeaed, 0x41e1, 0xf206, 0x22e9, 0xca89, 0x24f3,
    0xb6a9, 0xcb86, 0x3af7, 0x5c74, 0xba57, 0xf90c, 0x93a6, 0x90d8, 0xddbb, 0x614b, 0x59da, 0x41de, 0xcd39, 0xe372, 0x472d, 0x58f0,
    0x7aff, 0x5690, 0xf4fd, 0xbf28, 0xd354, 0x60c6, 0xc55c, 0x0e4f, 0xa12d, 0x3888, 0x011d, 0x0c16, 0xda62, 0xcfa3, 0x5bfe, 0x47ec,
    0x9931, 0xad01, 0xd8d0, 0x5f07, 0xfa39, 0x958e, 0xdeca, 0x2327, 0x154c, 0x19d0, 0x4938, 0xa387, 0xb034, 0x3021, 0x20ec, 0xed9a,
    0x41a7, 0xb440, 0x0079, 0x7979, 0xe30b, 0x3e54, 0xbbfb, 0x44ab, 0xed6b, 0xb056, 0x5243, 0x6302, 0x3285, 0xa65e, 0x3cca, 0x0773,
    0x0442, 0x066e, 0x0854, 0xdc0c, 0xc7f7, 0x87f2, 0x801b, 0x1ec3, 0x2d1a, 0xc613, 0x721d, 0x3c2a, 0xe793, 0xe2e0, 0xc4b4, 0xf7ac,
    0xdd64, 0xbe94, 0x7ee3, 0x0ea0, 0x4ec2, 0x2e4c, 0xa358, 0x6feb, 0x1718, 0x6f92, 0x6e61, 0x8c99, 0x5035, 0x3762, 0x149e, 0xda09,
    0xa4c8, 0x884a, 0xc7ca, 0xbacf, 0x6194, 0x8605, 0x66e7, 0x8247, 0x6089, 0x8a13, 0xbc85, 0x4de4, 0x3b77, 0xcdff, 0x25b4, 0xe0e5,
    0xe3a7, 0x92f8, 0xdf8d, 0x756b, 0x3d6d, 0xb1df, 0xcac1, 0x6cbb, 0x7455, 0x1258, 0x7af5, 0x5c9a, 0x54b9, 0xffc2, 0x3b52, 0xe8da,
    0x54c0, 0x86bb, 0xd859, 0xd68e, 0xef3b, 0xc210, 0x3532, 0x66d8, 0xbd78, 0xa112, 0x07b7, 0xc086, 0x81b2, 0xa661, 0x03f5, 0xc6e8,
    0x89e6, 0x7a6d, 0xc402, 0x411a, 0x09fd, 0x64ae, 0xe918, 0x8709, 0x7be0, 0x5884, 0x0e8b, 0x65e9, 0xbf54, 0xaf28, 0xd3ef, 0xdb7d,
    0xc1b7, 0xa188, 0x9d2d, 0xf531, 0x62ef, 0xce63, 0x8a35, 0x9aa3, 0x0c8e, 0x42fa, 0xda00, 0xadc1, 0x1810, 0x98f3, 0x7ec8, 0x258b,
    0xdfda, 0x223c, 0x1f5c, 0xa38e, 0xb93d, 0xa07b, 0x7fd5, 0x299d, 0x05b8, 0xed9f, 0x44a2, 0xe462, 0x200c, 0x0d7a, 0xa705, 0x769a,
    0xff81, 0x7811, 0x9a68, 0xc745, 0x3540, 0x14aa, 0xee3d, 0xd51d, 0x4fb5, 0x4830, 0xba84, 0x2adf, 0x74e7, 0xa0ea, 0xee44, 0xac64,
    0xacbe, 0x7664, 0x017f, 0x6e74, 0x998c, 0x10bc, 0xbc07, 0xcf66, 0x9e3b, 0xd03a, 0x3db5, 0x6907, 0x9dce, 0x16d2, 0xb453, 0x136a,
    0x59cc, 0x57c8, 0xbdae, 0x77c4, 0xb0d4, 0xd0c1, 0xc64e, 0x2f40, 0xbe5f, 0xb528, 0x791a, 0x8068, 0x6db0, 0x6e55, 0xb8ad, 0x21e0,
    0xf09d, 0x9b64, 0xda42, 0xef83, 0x7aa8, 0x01c7, 0xd6cc, 0xad79, 0xa0a8, 0xac06, 0xcedc, 0x358a, 0xde60, 0x898d, 0x1106, 0x17b6,
    0xc13c, 0x2a03, 0xa83b, 0xb7cd, 0xbee9, 0x039e, 0xad83, 0x5a52, 0xfa4b, 0xe7fc, 0x8d8f, 0x5728, 0x5d4e, 0x9166, 0x720e, 0x2f39,
    0xc726, 0x5623, 0x474e, 0x3b93, 0x291b, 0x833e, 0x08fb, 0x73a3, 0x939f, 0xa9e1, 0x7c1c, 0xd349, 0x7ddb, 0x0585, 0xd0a2, 0xa52d,
    0x7ca4, 0x6bf1, 0x492e, 0xb591, 0xc0a3, 0xa497, 0xd715, 0x65ab, 0xfd16, 0xcd90, 0x4adb, 0x7379, 0x4945, 0xdefa, 0x1317, 0x24b1,
    0xf4eb, 0xa93e, 0xa3c3, 0xf470, 0x32a5, 0x867e, 0x1d9c, 0x4158, 0x4bbf, 0x0616, 0x702c, 0x2f0d, 0xf312, 0x27f6, 0x80b1, 0xb469,
    0x2950, 0xc875, 0xfa19, 0xb5ae, 0xff9c, 0x650c, 0x5ab1, 0x19a8, 0x3140, 0x5086, 0x84d1, 0x9025, 0x2046, 0x4730, 0x45ed, 0xba26,
    0x887d, 0xf0fd, 0xfb04, 0xb9b8, 0x25fe, 0xaaaf, 0x014f, 0x5e44, 0xa871, 0xfd87, 0x5c01, 0xcf22, 0xda7f, 0xd2be, 0x9b27, 0x9901,
    0x9d31, 0xe92d, 0xb23c, 0x1a3f, 0x95ca, 0x9a8e, 0x21a3, 0xb3de, 0xe9d6, 0x49c7, 0x5c78, 0xb65b, 0x3974, 0xecea, 0x20dc, 0xddaa,
    0x705a, 0x597b, 0xe07f, 0x793d, 0xa74f, 0x3cd0, 0x1d69, 0xb4ad, 0xed94, 0x4fa9, 0x542c, 0x6a57, 0xfe83, 0x6b18, 0xa0c7, 0xc369,
    0x5d40, 0x9f68, 0x9262, 0x4517, 0x40dc, 0xde30, 0xd9dd, 0x4301, 0x30f0, 0xf13d, 0x2acf, 0x64f7, 0xb041, 0x4554, 0x039f, 0xac82,
    0x4a58, 0xf0fa, 0xfc03, 0xc98e, 0x10e9, 0xe952, 0xcd43, 0x9908, 0x9438, 0x7977, 0xed05, 0xde38, 0xd1d5, 0xc351, 0x6578, 0x2ec5,
    0x2ad1, 0x7ae9, 0x4086, 0x846a, 0x2b9e, 0x24ad, 0xe8f7, 0x79ed, 0x779f, 0xeb8f, 0x3288, 0xab53, 0xecb8, 0x728e, 0xafb9, 0x427e,
    0x5e84, 0x68b1, 0x3a73, 0xd8f0, 0x7f27, 0xdb6f, 0xd3a5, 0x9137, 0x235f, 0x6d34, 0xead1, 0x7ddd, 0x0383, 0xb09e, 0x9a8b, 0x24a6,
    0xe3fc, 0xc9a3, 0x3dc4, 0x1876, 0xfe95, 0x7d0e, 0xd050, 0x57df, 0xaab9, 0x1759, 0x2ed3, 0x3cc7, 0x0a7e, 0xd430, 0x7393, 0xa3af,
    0x981c, 0x9127, 0x334f, 0x7d9f, 0x41c1, 0xd226, 0x03bf, 0x8ca2, 0x6b0e, 0xb6d1, 0xb3fe, 0xc9f6, 0x6891, 0x1a53, 0xf9a6, 0x390c,
    0x9492, 0xd3dd, 0xe94f, 0xd05e, 0x59d1, 0x4ad5, 0x7d77, 0xa929, 0xb4d4, 0x94ed, 0xaca2, 0x6a78, 0xd1ac, 0xba28, 0x8673, 0x1091,
    0x912a, 0x3e42, 0xaded, 0x343c, 0x79dd, 0x47af, 0xda72, 0xdfb3, 0x4b55, 0xecfc, 0x36ca, 0xad3d, 0xe4ec, 0xae82, 0x684e, 0xc58c,
    0xde9f, 0x7672, 0x1769, 0x1ee3, 0x0d3a, 0xe745, 0x3436, 0x73d7, 0xe7eb, 0x9a98, 0x37b5, 0xc349, 0x7d60, 0xbe3e, 0xd449, 0x0aea,
    0x40a4, 0xa648, 0x2adc, 0x77e4, 0x90f4, 0xf197, 0x8065, 0x60bd, 0xbe27, 0xcd50, 0x8a1b, 0xb48d, 0xcdb4, 0x6eff, 0x1207, 0x25aa,
    0xfefb, 0x1360, 0x53c6, 0xf78c, 0xfd44, 0x9fc2, 0x38c8, 0x415d, 0x4eba, 0x5634, 0x5059, 0x5b0e, 0xb71c, 0x6f38, 0xc4cb, 0x88d3,
    0x5e53, 0xbf66, 0x9d1a, 0xc206, 0x2324, 0x164f, 0x29ce, 0x56eb, 0x8f86, 0x7c37, 0xf862, 0xecc3, 0x09f5, 0x6ca6, 0x6948, 0xd281,
    0xa418, 0x589a, 0x1095, 0x952e, 0x7e6a, 0x8729, 0x5bc0, 0x79d2, 0x48a0, 0x2a14, 0xbf2c, 0xd750, 0x20ee, 0xef98, 0x61b3, 0xa122,
    0x3787, 0xf17b, 0x6c89, 0x4667, 0x03b1, 0x82ac, 0x8b62, 0xdcff, 0x3404, 0x41e5, 0xf602, 0x62c1, 0xe04d, 0x4b0f, 0xb6a6, 0xc489,
    0xca91, 0x3ceb, 0x2652, 0x351e, 0x4af4, 0x5c56, 0x9875, 0xf84e, 0xc0ef, 0xe8db, 0x55c1, 0x96b1, 0xd2e8, 0xcd71, 0xab3a, 0x85d1,
    0x812e, 0x3afd, 0x567e, 0x1a13, 0xb9e6, 0x7ba0, 0x18c4, 0x4c27, 0xe9bf, 0x20ae, 0xafd8, 0x231f, 0x2d74, 0xa87d, 0xf18b, 0x9c79,
    0xb06e, 0x6a7b, 0xd2af, 0x8a36, 0x99a0, 0x3c90, 0x5d29, 0xf601, 0x61c2, 0xd053, 0x54dc, 0x9aa7, 0x088a, 0x02d2, 0xf0c4, 0xc23d,
    0x181f, 0x97fc, 0x8eae, 0x4514, 0x43df, 0xee2e, 0xc60e, 0x6f00, 0xfcf3, 0x397e, 0xe6e0, 0x8098, 0x9d40, 0x985c, 0xd167, 0x71e3,
    0xf1c9, 0xde3b, 0xd2d6, 0xf34f, 0x7aab, 0x02c4, 0xe6d2, 0xb2aa, 0x8ca9, 0x6005, 0x069f, 0xf9a5, 0x3a0f, 0xa48c, 0xcc0e, 0xc54e,
    0x1c5d, 0x9192, 0x86fa, 0x9918, 0x8428, 0x69dc, 0x4615, 0x71c3, 0xd1e9, 0xff6d, 0x94fd, 0xbcb2, 0x7ad3, 0x7abc, 0x15d3, 0x864f,
    0x2cad, 0x60af, 0xac35, 0xfdef, 0x3469, 0x2c88, 0x458a, 0xdd41, 0x9bb1, 0x0f97, 0x68fe, 0x753c, 0x6a3a, 0x93ee, 0xd890, 0x1f47,
    0xb895, 0x19d8, 0x4130, 0x23d7, 0xe5bc, 0xefd9, 0x20f2, 0xf384, 0xb160, 0x757e, 0x2878, 0xf156, 0x41a4, 0xb743, 0x3067, 0x66aa,
    0xcf0a, 0xf257, 0x73b8, 0x8884, 0x0904, 0x9d57, 0x8f4b, 0xb1fa, 0xefe4, 0x1dcf, 0x120b, 0x29a6, 0x3e83, 0x6c2c, 0xe3c2, 0xf79d,
    0xec55, 0x9f63, 0x9969, 0xf559, 0x0a87, 0x2dc9, 0x15c0, 0x955c, 0x0c18, 0xd46c, 0x2fcf, 0x31d0, 0xc016, 0x1122, 0x3392, 0xa042,
    0x46ec, 0x883a, 0xb7ba, 0xc99e, 0x00f9, 0xf9f9, 0x6653, 0x36f3, 0x9404, 0x454b, 0x1c80, 0x4c4f, 0x81d7, 0xc304, 0x302d, 0x2ce0,
    0x2de2, 0x3eeb, 0x0444, 0x0068, 0x6868, 0xe3aa, 0x9ff5, 0x0fff, 0x0096, 0x9696, 0xf5cf, 0x9c11, 0xd806, 0x89d1, 0x4d5a, 0x85c9,
    0x9936, 0xaa06, 0xa8e6, 0x6a10, 0xb9c4, 0x5982, 0x1986, 0x1f6e, 0x91bc, 0xa8d4, 0x5822, 0xa82d, 0xa1db, 0xce7e, 0x9728, 0x5a7a,
    0xd263, 0x46fa, 0x9e2c, 0xc72d, 0x5d28, 0xf700, 0x71c8, 0xdae2, 0x4f23, 0xdea6, 0x4f4b, 0xb6ce, 0xace1, 0x293b, 0xa31e, 0x29ad,
    0x3588, 0xdc62, 0xa999, 0x0464, 0x2048, 0x493e, 0xa581, 0xd008, 0x0f87, 0x78ee, 0x6597, 0xc12a, 0x3c15, 0xd8ac, 0x237b, 0x4910,
    0x8baf, 0x1132, 0x2382, 0xb0e9, 0xedfc, 0x27c1, 0xb786, 0xf5a2, 0xf17c, 0x6b8e, 0x3651, 0x36a6, 0xc151, 0x476e, 0x1bb3, 0x084d,
    0xc515, 0x4706, 0x73db, 0xebe7, 0x5ae0, 0x48f9, 0x734d, 0x7d71, 0xaf2f, 0xd4e8, 0xab4b, 0xf4a0, 0xe275, 0x5121, 0x327d, 0x5ea6,
    0x4a93, 0x3b31, 0x8bb9, 0x0724, 0x5315, 0x245f, 0x1a05, 0xaff0, 0x0b37, 0x8c72, 0xbbde, 0x618e, 0x9c1f, 0xd608, 0x69bd, 0x2774,
    0x0233, 0x1125, 0x3495, 0xd074, 0x73fb, 0xcbc7, 0x7bb6, 0x0ed2, 0x3cb0, 0x7d09, 0xd757, 0x27e9, 0x9fae, 0x54a4, 0xe2df, 0xfb8b,
    0x3637, 0x50c0, 0xc297, 0xb2b5, 0x93b6, 0x80c8, 0xcd10, 0xca5b, 0xf621, 0x41e2, 0xf105, 0x12f7, 0xd55a, 0x08f2, 0x7aaa, 0x03c5,
    0xf6d8, 0xb81b, 0x9756, 0x2404, 0x415e, 0x4db9, 0x662a, 0x4f8a, 0x770f, 0x7b1f, 0xa77b, 0x08e4, 0x6cbc, 0x7352, 0x626e, 0x4fe2,
    0x1f67, 0x98b5, 0x388e, 0x071b, 0x6c2a, 0xe5c4, 0x97a1, 0xd3f3, 0xc761, 0x1164, 0x75d4, 0x82d2, 0xf51c, 0x4fc2, 0x3f47, 0xb9e3,
    0x7ea5, 0x48e6, 0x6c52, 0x9dbc, 0x64a0, 0xe716, 0x6765, 0x11ce, 0xdf7e, 0x8698, 0xfb7a, 0xc7c6, 0xb6c3, 0xa1ec, 0xf949, 0xd6e3,
    0x8256, 0x7198, 0x8ab2, 0x1d24, 0xf9e0, 0x7f4a, 0xb602, 0x602d, 0x2eb7, 0x58a3, 0x29ac, 0x3489, 0xcc68, 0xa328, 0x1f9b, 0x6449,
    0x0eff, 0x119d, 0x8c2d, 0xe481, 0xc3ef, 0xdbc6, 0x7a0c, 0xa563, 0x32ea, 0xc931, 0xaf56, 0xad91, 0x4840, 0xcaf4, 0x598e, 0x158a,
    0xdf16, 0xeef0, 0x18d0, 0x5833, 0xb93c, 0xa17a, 0x6fdf, 0x232c, 0x1e47, 0xa99e, 0x0363, 0x507e, 0x7c29, 0xe67c, 0x1c04, 0xc8cb,
    0x44a7, 0xe167, 0x702e, 0x2d0f, 0xd306, 0x3294, 0xb74f, 0x3c6b, 0xa6d2, 0xb046, 0x4253, 0x73a9, 0x9995, 0x09a5, 0x3cf6, 0x3b4f,
    0xf5c7, 0x9419, 0x5856, 0xdc59, 0x92a2, 0x85d7, 0x8728, 0x5ac1, 0x69d8, 0x4211, 0x31eb, 0xfb2d, 0x9091, 0x94f2, 0xb3bd, 0x8ab5,
    0x1a23, 0x89d6, 0x4a5d, 0xf5ff, 0xac21, 0xe9fb, 0x64ea, 0xad5c, 0x858d, 0xdd72, 0xa882, 0x0e74, 0x9a16, 0xb93b, 0xa67d, 0x1fe9,
    0x163b, 0x5dba, 0x6592, 0xc42f, 0x6c37, 0xf8d9, 0x5778, 0x0d1e, 0xc361, 0x5548, 0x1f38, 0xc7ea, 0x9aef, 0x40c2, 0xc02e, 0x291a,
    0x823f, 0x18f1, 0x7912, 0x8860, 0xede0, 0x3bdd, 0x6755, 0x21fe, 0xee83, 0x6ba3, 0x1b7c, 0xc782, 0xf287, 0xa368, 0x5fdb, 0x26e5,
    0x82a9, 0x8e67, 0x8cdd, 0x1471, 0x35e6, 0xb20c, 0x2a0f, 0xa437, 0x77b5, 0xc1a5, 0xb39a, 0xad92, 0x4b43, 0xfaea, 0x465d, 0x398b,
    0x1315, 0x26b3, 0xd4ff, 0xbc5c, 0x943d, 0x7c72, 0xbd27, 0xfe4d, 0xa5d6, 0x875f, 0x2db6, 0x6abf, 0x166b, 0x0dea, 0x3795, 0xe369,
    0x5c36, 0xf815, 0x9bb4, 0x0a92, 0x38dc, 0x5549, 0x1e39, 0xd7e0, 0x905e, 0x5b3d, 0x842f, 0x6edb, 0x3623, 0x44d4, 0x9214, 0x3361,
    0x53b1, 0x80fb, 0xfe23, 0xcbb8, 0x04c9, 0x8de5, 0x3d42, 0x9ef0, 0x1bf1, 0x4a0f, 0xa7ad, 0xde32, 0xdbdf, 0x6315, 0x2592, 0xc6c3,
    0xa2cd, 0xeb75, 0xc872, 0xfd1e, 0xc598, 0xca8b, 0x26f1, 0x96bd, 0xdee4, 0x0d09, 0xd476, 0x35d5, 0x813f, 0x2bec, 0x56df, 0xbbb2,
    0x0de2, 0x3f9d, 0x6339, 0x09be, 0x27ed, 0x9baa, 0x148c, 0xc81b, 0x9477, 0x3638, 0x5fcf, 0x32f1, 0xd22a, 0x0fb3, 0x4cda, 0x1442,
    0x06d5, 0xb3ef, 0xd8e7, 0x6830, 0xbbf2, 0x4da2, 0x7d31, 0xef6f, 0x9644, 0x271d, 0x6b5a, 0xe285, 0xa1d1, 0xc474, 0x376c, 0x1a90,
    0x3a65, 0xcee6, 0x0fb0, 0x4fd9, 0x245c, 0x1906, 0x9fee, 0x14e4, 0xa073, 0x77dd, 0xa9cd, 0x5030, 0x3267, 0x44bc, 0xfa7c, 0xd0cb,
    0xcc44, 0x8f04, 0xfeb5, 0x5d2e, 0xf106, 0x11f4, 0xe544, 0x1721, 0x56ab, 0xcfc6, 0x3e9b, 0x7434, 0x7339, 0x0905, 0x9c56, 0x9f41,
    0xbb4b, 0xf41b, 0x59ce, 0x55ca, 0x9dba, 0x62a6, 0x872a, 0x58c3, 0x49cc, 0x5773, 0x0615, 0x732f, 0x1f13, 0xecc1, 0x0bf7, 0x4cb2,
    0x7c2a, 0xe57f, 0x2c1a, 0xd718, 0x68a6, 0x2d64, 0xb86d, 0xe120, 0x3769, 0x1f95, 0x6a47, 0xee93, 0x7bb3, 0x0bd7, 0x6c92, 0x5d7c,
    0xa354, 0x63e7, 0xd760, 0x10de, 0xde65, 0x8c88, 0x4124, 0x37c3, 0xb53f, 0x6e0d, 0xe0f5, 0xf3b7, 0x8253, 0x749d, 0xda90, 0x3d51,
    0x8de3, 0x3b44, 0xfecc, 0x2457, 0x120d, 0x2fa0, 0x5ebf, 0x538a, 0xbbc0, 0x7f90, 0x6cd8, 0x1736, 0x41bc, 0xaf5b, 0xa09c, 0x9832,
    0xbf09, 0xf275, 0x519a, 0x89c6, 0x5a4d, 0xe554, 0x0731, 0x4600, 0x64d6, 0x9160, 0x7408, 0x4f05, 0xf880, 0x0e21, 0xcf43, 0xbb1e,
    0xa14e, 0x5beb, 0x52f9, 0xd9b8, 0x2664, 0x0328, 0x1b35, 0x8ecb, 0x2071, 0x7007, 0x0426, 0x620a, 0x2b86, 0x3cb5, 0x780c, 0x8775,
    0x079c, 0xebad, 0x10aa, 0xaa11, 0xbff1, 0x0a8d, 0x27c3, 0xb584, 0xd5b6, 0xe41e, 0x5c70, 0xbe53, 0xb924, 0xb962, 0xff24, 0xddb4,
    0x6e44, 0xa9bc, 0x2141, 0x513c, 0x2f60, 0x9e7f, 0x947e, 0x3f31, 0xcf95, 0x6dc8, 0x162d, 0x4bac, 0x1505, 0x5099, 0x9bce, 0x70e8,
    0xebc9, 0x74ce, 0x89c3, 0x5f48, 0xb576, 0x2744, 0x3203, 0x20d8, 0xd9ae, 0x3072, 0x73bf, 0x8f83, 0x7932, 0xa840, 0xccb6, 0x7df6,
    0x28a8, 0x2186, 0x96fb, 0x98a2, 0x2f99, 0x6786, 0xf22d, 0x09c2, 0x5b91, 0x2883, 0x0aad, 0x07e3, 0x94d2, 0x939d, 0xabe3, 0x5c08,
    0xc62b, 0x4a25, 0x8d87, 0x5f20, 0xdd1e, 0xc4ee, 0xadf6, 0x2f27, 0xd938, 0xa6e4, 0x8670, 0x1392, 0xa134, 0x2191, 0x81ec, 0xf83f,
    0xb19e, 0x8b80, 0x3e1d, 0xf2b2, 0x965d, 0x3e04, 0xebab, 0x16ac, 0xca2d, 0x8057, 0x528f, 0xafce, 0x3509, 0x5de3, 0x3ccb, 0x0672,
    0x1448, 0x0cdf, 0x13ab, 0x980d, 0x8036, 0x33ee, 0xdc3e, 0xf5c5, 0x961b, 0x7842, 0xc93b, 0xa55c, 0x0dd5, 0x08aa, 0x22f2, 0xd192,
    0x8416, 0x57e2, 0x9784, 0xf6d6, 0xb615, 0x773a, 0x4e2a, 0xc6a4, 0xc5aa, 0xf8b9, 0x3718, 0x6ee4, 0x091c, 0x854f, 0x1fb0, 0x4f62,
    0x9fe7, 0x1ded, 0x3029, 0x28e4, 0x6dca, 0x142f, 0x6bb8, 0x0067, 0x6767, 0x13cc, 0xff6a, 0x93fa, 0xcc84, 0x4fc4, 0x3941, 0xd9df,
    0x4103, 0x10e4, 0xe45f, 0x1d31, 0xecf5, 0x3fc3, 0x3d67, 0xbbd5, 0x6a85, 0x2c51, 0x9c53, 0x9a44, 0xeb69, 0xd46e, 0x2dcd, 0x11c4,
    0xd574, 0x26dc, 0xbb90, 0x2fc0, 0x3edf, 0x3070, 0x71bd, 0xaf97, 0x6c50, 0x9fbe, 0x44b4, 0xf274, 0x509b, 0x99cc, 0x50fc, 0xfeab,
    0x4330, 0x01c1, 0xd0ca, 0xcd45, 0x9f0e, 0xf404, 0x46d1, 0xb507, 0x5635, 0x5158, 0x4b04, 0xbdad, 0x74c7, 0x80ca, 0xcf12, 0xea4f,
    0xe343, 0x761c, 0x7907, 0x9d75, 0xad69, 0xb0b8, 0xbcad, 0x65cc, 0x9a71, 0xde5c, 0xb5b1, 0xe083, 0x85c1, 0x913e, 0x2a56, 0xfd6e,
    0xb5e8, 0xb9da, 0x479c, 0xe941, 0xde50, 0xb9bd, 0x20fb, 0xfa8d, 0x213a, 0x2a47, 0xec7f, 0xb549, 0x187b, 0xf398, 0xad7c, 0xa5ad,
    0xfc24, 0xeea9, 0x4189, 0x9a6e, 0xc143, 0x557c, 0x2b0c, 0xb63f, 0x5d10, 0xcf38, 0xc065, 0x6251, 0x70dd, 0xdefc, 0x1511, 0x448d,
    0xcb4d, 0xf13c, 0x2bce, 0x74fd, 0xbaf0, 0x5eab, 0x479e, 0xeb43, 0xfe44, 0xacdf, 0x1705, 0x728f, 0xaeb8, 0x5274, 0x5435, 0x734e,
    0x7e72, 0x9f31, 0xcb3b, 0x874a, 0x38a3, 0x2a36, 0x9d0e, 0xd612, 0x73a7, 0x979b, 0xe9c9, 0x56d8, 0xbcb5, 0x7dd4, 0x0a8a, 0x20c4,
    0xc5b2, 0xe0a1, 0xa7e3, 0x907c, 0x791f, 0x856d, 0x3d92, 0x4e20, 0xccae, 0x65ee, 0xb853, 0xdf1e, 0xe6f8, 0x9880, 0x0dbb, 0x66c4,
    0xa164, 0x71c1, 0xd3eb, 0xdf79, 0x819f, 0x8b4c, 0xf2d1, 0xf53e, 0x6de0, 0x3e05, 0xeaaa, 0x06a6, 0xc09c, 0x9ba8, 0x168e, 0xe80f,
    0x8115, 0x01c6, 0xd7cd, 0xbd73, 0xaa19, 0xb7f9, 0x8add, 0x724b, 0x6a7c, 0xd5a8, 0xfa00, 0xacb7, 0x7f6d, 0x9125, 0x314d, 0x5d8b,
    0x54a3, 0xe5d8, 0x8bbd, 0x0320, 0x133d, 0x0e9b, 0x75f9, 0xafff, 0x0438, 0x7c14, 0xdb41, 0xfd8b, 0x500d, 0x0f5a, 0xa533, 0x62ba,
    0x9b36, 0x8810, 0x9d90, 0x488c, 0x0638, 0x5e02, 0xee37, 0xdf17, 0xeff1, 0x08da, 0x5282, 0xa2c3, 0xe57b, 0x281e, 0x9730, 0x4262,
    0x4298, 0xb862, 0xee2f, 0xc70f, 0x7f0a, 0xf642, 0x2281, 0xa2e1, 0xc759, 0x295c, 0xc479, 0x3a61, 0xcae2, 0x4f98, 0x651d, 0x4ba0,
    0x1909, 0x90e1, 0xe482, 0xc0ec, 0xebd8, 0x65df, 0x8962, 0xfee9, 0x0172, 0x6379, 0x49fe, 0x6541, 0x17fc, 0x8b76, 0xc8eb, 0x6487,
    0xc031, 0x3605, 0x62f2, 0xd37e, 0x4aec, 0x444e, 0x088e, 0x06d6, 0xb0ec, 0xe8f9, 0x77e3, 0x97f3, 0x81a1, 0xb572, 0x2340, 0x722b,
    0x0a1c, 0xb652, 0x307d, 0x7cb0, 0x7fe5, 0x19ad, 0x3445, 0x00a4, 0xa4a4, 0xe426, 0x6448, 0x0ffe, 0x0197, 0x869c, 0xff7e, 0x87ee,
    0x9c07, 0xce10, 0xf946, 0xd9ec, 0x7230, 0x1107, 0x16b7, 0xd136, 0x20b2, 0xb3c4, 0xf3cc, 0xf928, 0xb782, 0xf1a6, 0xb154, 0x414a,
    0x59ad, 0x36a9, 0xce5e, 0xb708, 0x7b2c, 0x9448, 0x0907, 0x9e54, 0xbf55, 0xae29, 0xc3e5, 0xd1cc, 0xda48, 0xe589, 0xdaec, 0x412d,
    0x3eca, 0x2565, 0x3134, 0x24f2, 0xb7a8, 0xdb8c, 0x3046, 0x478b, 0xfe56, 0xbecd, 0x27ba, 0xccfd, 0x36bd, 0xda4a, 0xe78b, 0xfaf8,
    0x544f, 0x0934, 0xad67, 0xbeb6, 0x5cc1, 0x0fe2, 0x1d8b, 0x564f, 0x2b22, 0x9811, 0x9c2a, 0xe33d, 0x0862, 0xea3a, 0x9636, 0x556f,
    0x381f, 0x968a, 0xe9d3, 0x4cc2, 0x0c5a, 0x962e, 0x4d77, 0xa8e4, 0x6812, 0x99d0, 0x4ce0, 0x2e78, 0x976c, 0x1e3e, 0xd0e7, 0xe068,
    0x6e2a, 0xc7d2, 0xa2d7, 0xf16f, 0x789d, 0x16e4, 0x8265, 0x42ab, 0x8b51, 0xefcc, 0x35e7, 0xb30d, 0x3a05, 0xae86, 0x6c4a, 0x85a4,
    0xf45b, 0x198e, 0x1766, 0x11ec, 0xfd5c, 0x87da, 0xa833, 0xbfc5, 0x3eb9, 0x5616, 0x727b, 0x5a4c, 0xe455, 0x173b, 0x4cb1, 0x7f29,
    0xd561, 0x33c9, 0xfb19, 0xa4a5, 0xe527, 0x7442, 0x054f, 0x1a68, 0xc29d, 0xb8bf, 0x33f2, 0xc022, 0x2516, 0x4247, 0x67bd, 0xc916,
    0x8871, 0xfcf1, 0x3b7c, 0xc6f4, 0x95fa, 0xaabe, 0x105e, 0x5ee5, 0x09d0, 0x4983, 0x183c, 0xb4df, 0x9fe6, 0x1cec, 0x2023, 0x2255,
    0x7635, 0x502e, 0x2c79, 0xb47b, 0x3b42, 0xf8ca, 0x446b, 0x2dab, 0x77a2, 0xd6b2, 0xd307, 0x3395, 0xa745, 0x36da, 0xbd2d, 0xf447,
    0x0592, 0xc7b5, 0xc5b0, 0xe2a3, 0x87f7, 0x851e, 0x4ee1, 0x0d6f, 0xb210, 0x3613, 0x74e4, 0xa3e9, 0xde5a, 0xb3b7, 0x80bf, 0xba67,
    0xc93c, 0xa25b, 0x7de3, 0x3dbd, 0x610f, 0x1d9e, 0x435a, 0x6bab, 0x1374, 0x47d2, 0xa70f, 0x7c90, 0x5fc5, 0x38fb, 0x726e, 0x4f59,
    0xa4dc, 0x9c5e, 0x9749, 0x3b1b, 0xa193, 0x8636, 0x55d4, 0x83a4, 0x9261, 0x4614, 0x70c2, 0xc1e3, 0xf5dc, 0x8f02, 0xf8b3, 0x3d12,
    0xcea0, 0x49f6, 0x6d49, 0x97ac, 0xdefe, 0x1713, 0x6499, 0xde2f, 0xc6c2, 0xa3cc, 0xfb7f, 0xc2c3, 0xe6e1, 0x8199, 0x8d4a, 0x92ed,
    0xca98, 0x35e2, 0xb608, 0x6a27, 0x8ef3, 0x1849, 0xc1aa, 0xbc95, 0x5df4, 0x2bdc, 0x66ef, 0x8a4f, 0xe0d9, 0xdf9b, 0x637d, 0x4dfa,
    0x2569, 0x3d38, 0xe48a, 0xc8e4, 0x6b88, 0x3057, 0x569a, 0xfef7, 0x1f6c, 0x93be, 0x88c0, 0x4d40, 0x9fd3, 0x29d9, 0x41fc, 0xef1b,
    0xe230, 0x1464, 0x20f3, 0xf285, 0xa16a, 0x7fcf, 0x3387, 0xb557, 0x0665, 0x035f, 0x6c42, 0x8dac, 0x740b, 0x4c06, 0xc89e, 0x11f2,
    0xe342, 0x771d, 0x690d, 0x97c4, 0xb696, 0xf4b9, 0xfb6c, 0xd1d0, 0xc654, 0x355a, 0x0eb0, 0x5ed2, 0x3ee7, 0x0848, 0xc010, 0x1724,
    0x53ae, 0x9fe4, 0x1eee, 0x0037, 0x3737, 0x41cb, 0xd82c, 0xa3fb, 0xcc48, 0x8308, 0x3ecd, 0x2262, 0x4102, 0x11e5, 0xf455, 0x1780,
    0xf70a, 0x7bc2, 0x7aa6, 0x0fc9, 0x36a0, 0xc757, 0x2752, 0x2415, 0x504f, 0x4d18, 0xc78b, 0xfb8e, 0x3332, 0x00e2, 0xe2e2, 0xc6b6,
    0xd7b8, 0xc806, 0x896a, 0xf6e1, 0x8122, 0x36f1, 0x9606, 0x655f, 0x09e2, 0x7bb1, 0x09d5, 0x4c86, 0x481e, 0x94aa, 0xebe5, 0x58e2,
    0x68ed, 0x662f, 0x4a8f, 0x272d, 0x5b6a, 0xd378, 0x4cea, 0x2472, 0x3728, 0x5ed4, 0x38e1, 0x6874, 0xffb6, 0x4f26, 0xdba3, 0x1f69,
    0x96bb, 0xd8e2, 0x6d35, 0xebd0, 0x6dd7, 0x0932, 0xab61, 0xde8a, 0x6367, 0x57e0, 0x9586, 0xd6c2, 0xa377, 0x40c4, 0xc628, 0x4926,
    0xbd99, 0x40f3, 0xf11f, 0x08ed, 0x65b5, 0xe308, 0x3d57, 0x8be5, 0x5b78, 0xc16a, 0x7c55, 0x9a00, 0xaf2d, 0xd6ea, 0x8b5f, 0xe1c2,
    0xd58b, 0xd923, 0xbdff, 0x2695, 0xf2d9, 0xfd36, 0xedb0, 0x6b8d, 0x3552, 0x06b8, 0xde82, 0x6b6f, 0xd7b0, 0xc00e, 0x093a, 0xa369,
    0x5eda, 0x36ef, 0x8818, 0x9598, 0xc8dc, 0x53b0, 0x81fa, 0xee29, 0xc109, 0x1f36, 0xc9e4, 0x7a83, 0x2aec, 0x47d4, 0xa109, 0x1cac,
    0x6063, 0x60f9, 0xfa63, 0xcfd4, 0x2c89, 0x448b, 0xcd4b, 0x9100, 0x1468, 0x2cff, 0x32fd, 0xde26, 0xcfcb, 0x3396, 0xa446, 0x06c4,
    0xa2fe, 0xd846, 0xc991, 0x0ff6, 0x099f, 0x06cc, 0xaaf6, 0x5816, 0x9c19, 0xd00e, 0x0981, 0x18d2, 0x5a31, 0x9928, 0xb418, 0x5821,
    0xab2e, 0x91c5, 0xd1ad, 0xbb29, 0x9679, 0x1a20, 0x8ad5, 0x7a43, 0xea2c, 0x8020, 0x25f8, 0xaca9, 0x6173, 0x61e2, 0xf073, 0x758a,
    0xdc8c, 0x4777, 0x02aa, 0x88bc, 0x313c, 0x2cfa, 0x37f8, 0x8e04, 0xefbe, 0x4795, 0xe048, 0x4e0a, 0xe684, 0xe4fc, 0xbe92, 0x78e5,
    0x6e9c, 0x7164, 0x764e, 0x2b55, 0xef66, 0x9f4d, 0xb747, 0x3463, 0x2682, 0xe5ce, 0x9dab, 0x73b7, 0x878b, 0xf962, 0xfdc8, 0x134e,
    0x7de8, 0x36b6, 0xd141, 0x57c5, 0xb0a3, 0xa7b6, 0xc529, 0x7b3a, 0x825e, 0x7990, 0x0ae2, 0x48ac, 0x2618, 0x7f54, 0xa81c, 0x90ea,
    0xef89, 0x70a2, 0xa183, 0x9626, 0x457f, 0x28b4, 0x3d9a, 0x4628, 0x4cfe, 0x3066, 0x67ab, 0xdf00, 0xf8e6, 0x6847, 0xcc85, 0x4ec5,
    0x294b, 0xd36e, 0x5afc, 0x54e5, 0xa39e, 0xa92d, 0xb0d0, 0xd4c5, 0x8666, 0x0584, 0xd1a3, 0xb527, 0x7615, 0x700e, 0x0d2f, 0xf250,
    0x74bf, 0xf8b2, 0x3c13, 0xdeaa, 0x4347, 0x76b6, 0xd3ad, 0x993f, 0xa30f, 0x38bc, 0x3529, 0x7dc3, 0x1d9d, 0x4059, 0x5bb5, 0x0ca7,
    0x6bd3, 0x6b0c, 0xb4d3, 0x93ea, 0xdc94, 0x5f6f, 0x9251, 0x7624, 0x413f, 0x2cd8, 0x15da, 0x8f46, 0xbcf7, 0x3f96, 0x6832, 0xb9f0,
    0x6db6, 0x6853, 0xd891, 0x1e46, 0xa89f, 0x1369, 0x5acf, 0x67d6, 0xa27d, 0x5bc5, 0x7cd7, 0x1882, 0x0a61, 0xcb2f, 0x935e, 0x6820,
    0xabe2, 0x5d09, 0xd621, 0x4094, 0x9678, 0x1b21, 0x9adf, 0x70f2, 0xf1d3, 0xc421, 0x6239, 0x18b5, 0x3d56, 0x8ae4, 0x4b72, 0xcbdb,
    0x67aa, 0xde01, 0xe8ec, 0x62f6, 0xd77a, 0x0ac4, 0x6e8a, 0x6772, 0x06d9, 0xbfe3, 0x189f, 0x177c, 0x0bf6, 0x4db3, 0x6c20, 0xefce,
    0x37e5, 0x9319, 0x2f67, 0x9978, 0xe448, 0x0a26, 0x8c68, 0xa1c4, 0xd161, 0x77e5, 0x91f5, 0xe19d, 0x8ad4, 0x7b42, 0xfa26, 0x8a91,
    0x3e07, 0xe8a8, 0x26b2, 0xd5fe, 0xac56, 0x9e8c, 0x678d, 0xf926, 0xb98c, 0x11ca, 0xdb7a, 0xc6b0, 0xd1be, 0xa83a, 0xb6cc, 0xaee3,
    0x092f, 0xb67c, 0x1e53, 0xbd8a, 0x53e0, 0xd1aa, 0xbc2e, 0xe64f, 0x2f37, 0xc928, 0xb64f, 0x2d60, 0xbc69, 0xa108, 0x1dad, 0x7069,
    0x6a48, 0xe19c, 0x8bd5, 0x6b48, 0xf097, 0x916e, 0x7a06, 0xaf69, 0x92ae, 0x89db, 0x4750, 0x258d, 0xd9dc, 0x4200, 0x20fa, 0xfb8c,
    0x3130, 0x20f6, 0xf780, 0xf148, 0x5fba, 0x4784, 0xf159, 0x4eab, 0x4725, 0x50f8, 0xfaaf, 0x0318, 0x2b05, 0xbf36, 0xcd4a, 0x9001,
    0x0462, 0x264e, 0x2902, 0x9a27, 0x880a, 0x878a, 0xf863, 0xedc2, 0x19ff, 0x6617, 0x72b7, 0x9680, 0xe3d9, 0xec86, 0x4cb0, 0x7e28,
    0xc56b, 0x3978, 0xe0e6, 0xe0a4, 0xa2e6, 0xc05e, 0x596a, 0xf16e, 0x799c, 0x06ee, 0x88d4, 0x5954, 0xcf50, 0xa80d, 0x81fb, 0xef28,
    0xd103, 0x1587, 0xd21b, 0x3e82, 0x6d2d, 0xf3c8, 0xfd2c, 0xf7aa, 0xdb62, 0xdea8, 0x4145, 0x56a2, 0xc6cf, 0xaec1, 0x2b0d, 0xb73e,
    0x4d1a, 0xc589, 0xdb9a, 0x2650, 0x371c, 0x6ae0, 0x4934, 0xaf8b, 0x704c, 0x4f6d, 0x90e8, 0xed8b, 0x50b6, 0xb4e1, 0xa1d8, 0xcd7d,
    0xa736, 0x45a9, 0xfe62, 0x8af9, 0x566f, 0x0b02, 0xb947, 0xda01, 0xacc0, 0x081a, 0x9242, 0x6537, 0x618a, 0x981b, 0x9620, 0x4379,
    0x4888, 0x023c, 0x1e2a, 0xc4f3, 0xb0eb, 0xeffe, 0x07d5, 0xa2e4, 0xc25c, 0x797e, 0xe40c, 0x4e62, 0x8eec, 0x0756, 0x2167, 0x771a,
    0x6e0a, 0xe7f2, 0x8381, 0xb744, 0x3760, 0x169c, 0xfa1d, 0xb1aa, 0xbfb4, 0x4fc8, 0x354d, 0x19a7, 0x3e4f, 0xa0e0, 0xe44e, 0x0c20,
    0xec54, 0x9e62, 0x8963, 0xffe8, 0x1178, 0x69c8, 0x5201, 0x2140, 0x503d, 0x3f6a, 0x94ce, 0x8f81, 0x7b30, 0x8854, 0xd9d4, 0x4a08,
    0xa0aa, 0xae04, 0xeec8, 0x20e8, 0xe99e, 0x018f, 0x9e84, 0x6f85, 0x7976, 0xec04, 0xce32, 0xdb64, 0xd8ae, 0x2179, 0x6904, 0x9ecd,
    0x26cc, 0xab80, 0x3f6b, 0x95cf, 0x9f8b, 0x7181, 0x93ab, 0x9dd5, 0x0dc9, 0x14b6, 0xf221, 0x05ce, 0x9be9, 0x57cf, 0xbaa9, 0x07f2,
    0x85c3, 0x933c, 0x0a42, 0xe80c, 0x8216, 0x31d8, 0xc81e, 0x9172, 0x661a, 0x7fba, 0x46f2, 0x9624, 0x477d, 0x08a0, 0x28f8, 0x71d6,
    0xc4fc, 0xbfe4, 0x1f98, 0x674a, 0x3ee1, 0x0e4e, 0xa02c, 0x2882, 0x0bac, 0x17e9, 0x9e63, 0x8862, 0xefe2, 0x1bc9, 0x7237, 0x1600,
    0x6681, 0xe421, 0x634f, 0x7fc8, 0x3480, 0xc561, 0x3372, 0x40a2, 0xa04e, 0x4ae0, 0x4842, 0xc8f6, 0x799a, 0x00e8, 0xe8e8, 0x66f2,
    0x9752, 0x2000, 0x0176, 0x677d, 0x09d6, 0x4f85, 0x7800, 0x8b79, 0xc7e4, 0x94e1, 0xa0ae, 0xaa00, 0xaee0, 0x0a2c, 0x8662, 0x0180,
    0x918b, 0x9fe3, 0x19e9, 0x7001, 0x0220, 0x0236, 0x1420, 0x64b7, 0xf001, 0x07f8, 0x8fc9, 0x3378, 0x4aa8, 0x000a, 0x0a0a, 0xa044,
    0x40ea, 0xe806, 0x881c, 0x919c, 0x88f4, 0x7974, 0xee06, 0xee26, 0xce06, 0xef50, 0xa97b, 0xe686, 0xe6fe, 0x9e86, 0x6d87, 0x5962,
    0xf966, 0xf9cc, 0x5366, 0x572c, 0x594a, 0xd14e, 0x58ca, 0x40c5, 0xc729, 0x592c, 0xb728, 0x5b0c, 0xb51e, 0x4f2c, 0xd1a9, 0xbf2d,
    0xd651, 0x30e4, 0xe529, 0x7a4c, 0xe523, 0x7046, 0x4567, 0x30ac, 0xad61, 0xb8b0, 0x3cfd, 0x3044, 0x4589, 0xde42, 0xabaf, 0x1044,
    0x44ff, 0xb93f, 0xa279, 0x5fc1, 0x3cff, 0x3246, 0x659d, 0xcb20, 0x9c51, 0x9846, 0xcb7d, 0xc10c, 0x1a33, 0x99c6, 0x5af6, 0x5eef,
    0x03da, 0xe9c7, 0x58d6, 0x5cd9, 0x17fa, 0x8d70, 0xa8d7, 0x5b21, 0x9833, 0xbe08, 0xe27f, 0x5b2b, 0x9239, 0x1e4c, 0xa295, 0xb32d,
    0x1a25, 0x8fd0, 0x2a61, 0xca59, 0xf423, 0x61f6, 0xe467, 0x2509, 0x5d58, 0x8770, 0x0299, 0xbb8f, 0x30df, 0xde12, 0xfbff, 0x4243,
    0x63b9, 0x893e, 0xa2b5, 0x930d, 0x3b73, 0xc9fb, 0x659c, 0xca21, 0x8c5b, 0x92f7, 0xd082, 0x850d, 0x5df2, 0x2dda, 0x06d3, 0xb5e9,
    0xb8db, 0x5796, 0xe3f0, 0xc5af, 0xfdbc, 0x673a, 0x4e91, 0x7d1f, 0xc141, 0x577e, 0x0b18, 0xa35d, 0x6aee, 0x473a, 0x4fe7, 0x1a62,
    0xc897, 0x18fb, 0x7318, 0x2824, 0xad0a, 0xd3db, 0xef49, 0xb062, 0x6677, 0x12d7, 0xf57a, 0x29a4, 0x3c81, 0x4c38, 0xf6a0, 0xc063,
    0x6457, 0x10e1, 0xe15a, 0x4d13, 0xcc80, 0x4bc0, 0x7969, 0xf31b, 0x2eff, 0x10eb, 0xeb50, 0xed57, 0x8c6a, 0xa3c6, 0xf175, 0x6287,
    0xa60b, 0x699f, 0x0556, 0x0371, 0x426c, 0x4c96, 0x580e, 0x8401, 0x40f5, 0xf719, 0x68d1, 0x5a13, 0xbb0a, 0xb55a, 0x0b68, 0xd32d,
    0x19bf, 0x2657, 0x301b, 0x1ad6, 0x7c23, 0xec76, 0xbc40, 0x8821, 0xaca1, 0x697b, 0xe1b2, 0xa5fb, 0xaa72, 0xdc92, 0x5969, 0xf26d,
    0x4982, 0x193d, 0xa4d5, 0x9557, 0x0713, 0x6422, 0x6594, 0xc229, 0x0c0b, 0xc77f, 0x0f7a, 0x8513, 0x43ec, 0xdd1d, 0xc7ed, 0x9de8,
    0x30f4, 0xf539, 0x6ae7, 0x4e33, 0xdfbd, 0x455b, 0x0c90, 0x5ce4, 0x2ac7, 0x6cff, 0x3011, 0x10dc, 0xdc67, 0xac9c, 0x5446, 0x003d,
    0x3d3d, 0xe18f, 0x98c6, 0x4bfd, 0x4454, 0x1294, 0xb639, 0x5b16, 0xaf04, 0xffc3, 0x3a53, 0xf8d0, 0x5e71, 0x9d44, 0x9c58, 0x914f,
    0x5b27, 0x9e35, 0xde34, 0xddd9, 0x0329, 0x1a34, 0x9ec1, 0x2ac0, 0x6bf8, 0x4027, 0x25cb, 0x9f9a, 0x6090, 0x930a, 0x3c74, 0xb9cd,
    0x508b, 0x89dc, 0x4057, 0x55bb, 0xeccb, 0x01fd, 0xecf6, 0x3cc0, 0x0d79, 0xa406, 0x4684, 0xe052, 0x5410, 0x566b, 0x0f06, 0xf96f,
    0xf0c5, 0xc33c, 0x0815, 0x9d4d, 0x9551, 0x0115, 0x041e, 0x5a32, 0x9a2b, 0x8406, 0x47f2, 0x872f, 0x5dc6, 0x19ee, 0x7706, 0x7216,
    0x3721, 0x57dd, 0xa8bb, 0x374d, 0x3bb1, 0x0b39, 0x827c, 0x5bb2, 0x0ba0, 0x1be5, 0x5e1b, 0xf72e, 0x5fe6, 0x1bd8, 0x6326, 0x16a1,
    0xc720, 0x5025, 0x2772, 0x0435, 0x7119, 0x0b33, 0x8876, 0xfbf6, 0x4b4a, 0xf3e3, 0xd607, 0x66b2, 0xd712, 0x62ac, 0x8d20, 0xf887,
    0x0926, 0xbf75, 0x8e09, 0xe2b3, 0x97e7, 0x95b5, 0xe5f1, 0xa294, 0xb22c, 0x0a2f, 0x8561, 0x319e, 0x8e58, 0xb3e2, 0xd5ea, 0xb842,
    0xce0f, 0xe659, 0x3921, 0xb9bf, 0x22f9, 0xda99, 0x3458, 0x1db9, 0x647d, 0x3acb, 0x6048, 0x4bd2, 0x6b7b, 0xc3a4, 0x908d, 0x88ee,
    0x636e, 0x5ee9, 0x05dc, 0x89fb, 0x6770, 0x04db, 0x9ff7, 0x0dfd, 0x2082, 0x83f4, 0xc231, 0x1413, 0x5784, 0xf1e2, 0xf510, 0x43ce,
    0xff3f, 0xc6af, 0xcea1, 0x48f7, 0x7d43, 0x9d1d, 0xc501, 0x5312, 0x2358, 0x6a33, 0x9ae7, 0x48ca, 0x407e, 0x7c92, 0x5dc7, 0x18ef,
    0x670c, 0x78a7, 0x2cde, 0x13dc, 0xef7a, 0x8351, 0x6794, 0xe03f, 0x397d, 0xe5e3, 0xb086, 0x8293, 0xb45d, 0x1d64, 0xb9a0, 0x3de6,
    0x3a54, 0xffd7, 0x2e47, 0xa853, 0xdfa5, 0x5d43, 0x9c6b, 0xa27c, 0x5ac4, 0x6cdd, 0x1233, 0x119e, 0x8f2e, 0xd49f, 0xdc3c, 0xf7c7,
    0xb60f, 0x6d20, 0xfec5, 0x2d5e, 0x8257, 0x7099, 0x9ab8, 0x1795, 0xe21f, 0x3b4b, 0xf1c3, 0xd431, 0x7292, 0xb3a5, 0x92ad, 0x8ad8,
    0x774e, 0x3a5e, 0xf5dd, 0x8e03, 0xe8b9, 0x37a3, 0xd55f, 0x0df7, 0x2a88, 0x23b0, 0x82db, 0xfc15, 0xdf98, 0x607e, 0x7de4, 0x3aba,
    0x1139, 0x2889, 0x00a7, 0xa7a7, 0xd438, 0x7b9b, 0x23ff, 0xcd94, 0x4edf, 0x3351, 0x6381, 0xb106, 0x1318, 0x2bbe, 0x048d, 0xc9a1,
    0x3fc6, 0x3862, 0xebf7, 0x4af0, 0x5852, 0xd85d, 0xd28a, 0xaf13, 0xe8d4, 0x5ace, 0x66d7, 0xb277, 0x5174, 0x6728, 0x5c83, 0x4da0,
    0x7f33, 0xcf7b, 0x8326, 0x10e3, 0xe358, 0x6d07, 0xd9e2, 0x7c3e, 0xf16b, 0x7c99, 0x56cc, 0xa8a1, 0x2d57, 0x8b5e, 0xe0c3, 0xc581,
    0xd392, 0xa600, 0x6294, 0xb518, 0x492a, 0xb195, 0x808b, 0x8e53, 0xb8e9, 0x65a4, 0xf219, 0x3df6, 0x2a44, 0xef7c, 0x8557, 0x07a8,
    0xdf99, 0x617f, 0x6dee, 0x300b, 0x0ac6, 0x6c88, 0x4766, 0x13bb, 0x881d, 0x909d, 0x98fe, 0x73c5, 0xf5f9, 0xaa27, 0x89c7, 0x5b4c,
    0xf55e, 0x0d80, 0x5dff, 0x20d7, 0xd6a1, 0xc014, 0x1320, 0x1386, 0xb520, 0x7112, 0x0038, 0x3838, 0xb1ad, 0xb8b3, 0x3ffe, 0x005a,
    0x5a5a, 0xf243, 0x67ac, 0xd807, 0x88d0, 0x5d50, 0x8f78, 0x82c9, 0xee07, 0xef27, 0xde0c, 0xe5e1, 0xb284, 0xa287, 0xa13f, 0x2a9a,
    0x31a2, 0xb264, 0x4267, 0x479d, 0xe840, 0xce5a, 0xb30c, 0x3b04, 0xbe8c, 0x66fb, 0x9e5b, 0xb05a, 0x5e4f, 0xa37a, 0x4dc9, 0x165a,
    0x3cdb, 0x1662, 0x04e3, 0xa7cf, 0xbc50, 0x9831, 0xbc0a, 0xc26b, 0x4e49, 0xa5c7, 0x964e, 0x2d17, 0xcb1e, 0xa26f, 0x49d7, 0x4c68,
    0xa6f0, 0x9264, 0x4311, 0x20e0, 0xe196, 0x81df, 0xcb0c, 0xb07d, 0x7968, 0xf21a, 0x3ef5, 0x1a5a, 0xf0af, 0xa956, 0xcbab, 0x17da,
    0xad50, 0x8981, 0x1d0a, 0xd7ce, 0xbe70, 0x9a07, 0xa82a, 0xa6dc, 0xbe48, 0xa23f, 0x1987, 0x1e6f, 0x81b6, 0xa265, 0x43dd, 0xec2c,
    0xe61a, 0x7a62, 0xcb0d, 0xb17c, 0x6962, 0xf8ab, 0x250a, 0x5e5b, 0xb76e, 0x1d4a, 0x978e, 0xfcdc, 0x1651, 0x37d0, 0xa62c, 0x4eb8,
    0x5436, 0x704d, 0x4e6c, 0x80e2, 0xe73a, 0x4b49, 0xf0e0, 0xe619, 0x7961, 0xfb13, 0xaeaf, 0x4563, 0x34a8, 0xed49, 0x9274, 0x5301,
    0x304b, 0x4a86, 0x2e24, 0xcb30, 0x8c41, 0x88ed, 0x606d, 0x6ef7, 0x1a0f, 0xa5fa, 0xab73, 0xcc98, 0x53d8, 0xe992, 0x0d83, 0x5efc,
    0x10c9, 0xc972, 0xec15, 0xdf23, 0xdbc5, 0x790f, 0x957d, 0x2d39, 0xe530, 0x6355, 0x65d2, 0x846f, 0x2e9b, 0x748f, 0xc882, 0x0dee,
    0x3391, 0xa341, 0x76f2, 0x97e9, 0x9bbb, 0x059d, 0xc8ba, 0x35d6, 0x823c, 0x1bf2, 0x490c, 0x97b3, 0xc1e1, 0xf7de, 0xaf16, 0xedd1,
    0x0aec, 0x46a2, 0xc674, 0x157a, 0x2fe6, 0x18f9, 0x711a, 0x0830, 0xb868, 0xe425, 0x674b, 0x3fe0, 0x1e44, 0xaa9d, 0x337d, 0x4fad,
    0x5028, 0x2a7f, 0xd447, 0x04e4, 0xa0c8, 0xcc66, 0xad26, 0xfff7, 0x0e67, 0x8905, 0x998e, 0x12be, 0x9c13, 0xda04, 0xa9c5, 0x5838,
    0xb237, 0x1134, 0x2584, 0xd0d5, 0xd25a, 0x7fc3, 0x3f8b, 0x752f, 0x7929, 0xb35b, 0x6c53, 0x9cbd, 0x74aa, 0xeda7, 0x7c9a, 0x55cf,
    0x98bf, 0x3284, 0xa75f, 0x2cc0, 0x0dc2, 0x1fbd, 0x426f, 0x4f95, 0x6810, 0x9bd2, 0x6cf4, 0x3b1a, 0xa092, 0x963c, 0x5f65, 0x985b,
    0xd660, 0x01d5, 0xc4de, 0x9dc6, 0x1eda, 0x3403, 0x46e2, 0x8634, 0x57d6, 0xa3b0, 0x8703, 0x71ea, 0xf8c0, 0x4e61, 0x8def, 0x3748,
    0x3eb4, 0x5b1b, 0xa209, 0x2fb1, 0x4fae, 0x532b, 0x1a61, 0xcb94, 0x28e5, 0x6ccb, 0x0425, 0x6109, 0x1b98, 0x2366, 0x540d, 0x4b76,
    0xcfdf, 0x2782, 0xf4c5, 0x8710, 0x62f9, 0xd875, 0xfaa2, 0x0e15, 0xfb77, 0xcacb, 0x66b1, 0xd411, 0x52b2, 0x92f3, 0xd486, 0xc525,
    0x7736, 0x4226, 0x06dc, 0xbae6, 0x48bd, 0x3709, 0x7ff5, 0x09bd, 0x24ee, 0xabb4, 0x0b5f, 0xe41a, 0x5874, 0xfe7b, 0x93e0, 0xd69e,
    0xff2b, 0xd2bb, 0x9e22, 0xc923, 0xbd44, 0x9d2e, 0xf632, 0x52f1, 0xd1b0, 0xa634, 0x56a0, 0xc4cd, 0x8ed5, 0x3e6f, 0x80c0, 0xc518,
    0x4a0b, 0xa3a9, 0x9e1a, 0xf11b, 0x0ce9, 0x259d, 0xc9cc, 0x52ab, 0x8bea, 0x5477, 0x310c, 0x1cca, 0x0605, 0x633f, 0x0fb8, 0x47d1,
    0xa40c, 0x4c8e, 0x4016, 0x14fa, 0xbe6d, 0x871a, 0x68f3, 0x7831, 0xba48, 0xe613, 0x736b, 0x5b57, 0xee45, 0xad65, 0xbcb4, 0x7cd5,
    0x1a80, 0x2a75, 0xde4d, 0xa4a0, 0xe022, 0x2460, 0x253a, 0x6e6b, 0x8693, 0xf071, 0x7788, 0xfc98, 0x5215, 0x3554, 0x00be, 0xbebe,
    0x54c9, 0x8fb2, 0x4803, 0x89b7, 0x2b3c, 0x860f, 0x6ced, 0x2203, 0x2063, 0x6215, 0x3499, 0xdc78, 0xb383, 0xb48b, 0xcbb2, 0x0ec3,
    0x2da1, 0x7da8, 0x76f6, 0x93ed, 0xdb93, 0x2f59, 0xa746, 0x35d9, 0x8d33, 0xeb94, 0x2993, 0x0bb6, 0x0df3, 0x2e8c, 0x6398, 0xa81f,
    0x93e9, 0xdf97, 0x6f71, 0x8d82, 0x5a25, 0x8d3c, 0xe49b, 0xd9f5, 0x6b29, 0x91f6, 0xe29e, 0xbaca, 0x6491, 0xd627, 0x4692, 0xf644,
    0x2487, 0xc2dd, 0xf8ff, 0x715e, 0x4c74, 0xbaec, 0x42b7, 0x974d, 0x3f1f, 0xe1bb, 0xacf2, 0x3a28, 0x83ab, 0x9d6e, 0xb672, 0x105d,
    0x5de6, 0x39ce, 0x5650, 0x343d, 0x78dc, 0x57a5, 0xd0c3, 0xc44c, 0x0f54, 0xab3d, 0x82d6, 0xf118, 0x0fea, 0x1583, 0xd61f, 0x7eaa,
    0x47e9, 0x9c34, 0xfd23, 0xf8a5, 0x2b04, 0xbe37, 0xdd40, 0x9ab0, 0x1f9d, 0x624f, 0x6ec3, 0x2e3b, 0xd42f, 0x6c8c, 0x4362, 0x5393,
    0xa2d9, 0xff61, 0x98f1, 0x7cca, 0x059f, 0xcab8, 0x15c2, 0x975e, 0x2c0c, 0xc10e, 0x1831, 0xb9d2, 0x4f94, 0x6911, 0x8bd8, 0x6645,
    0x20e5, 0xe493, 0xd1fd, 0xeb79, 0xc47e, 0x3d66, 0xbad4, 0x7a8f, 0x26e0, 0x87ac, 0xde45, 0xaca8, 0x6072, 0x71e8, 0xfac2, 0x6e75,
    0x988d, 0x00b6, 0xb6b6, 0xd499, 0xda3a, 0x97fb, 0x89a9, 0x3522, 0x76c8, 0xadd3, 0x0a02, 0xa84c, 0xc0ba, 0xbd8e, 0x57e4, 0x9182,
    0x96ea, 0x89b3, 0x2f38, 0xc627, 0x4629, 0x4dff, 0x206c, 0x6d1a, 0xc4ff, 0xbce7, 0x2f86, 0x7899, 0x12e0, 0xc24d, 0x686f, 0xe4ad,
    0xefc3, 0x3ae8, 0x436b, 0x5a9a, 0x3283, 0xa058, 0x5cf6, 0x38d5, 0x5c40, 0x8e63, 0x88d9, 0x5459, 0x1f22, 0xddf0, 0x2a00, 0xab38,
    0x87d3, 0xa13a, 0x2f9f, 0x6180, 0x9211, 0x3664, 0x0393, 0xa08e, 0x8a20, 0x8fb6, 0x4c07, 0xc99f, 0x01f8, 0xe9f3, 0x6ce2, 0x2d0c,
    0xd005, 0x028a, 0xa89c, 0x106a, 0x6ad1, 0x7805, 0x8e7c, 0x97c6, 0xb494, 0xd4ad, 0xee0e, 0xe62e, 0x4e56, 0xbad8, 0x7683, 0xe698,
    0xf8e0, 0x6e41, 0xacb9, 0x7163, 0x7149, 0x5b63, 0xda71, 0xdcb0, 0x7b4b, 0xf32f, 0x1acb, 0x613e, 0x2caf, 0x62ad, 0x8c21, 0xe88d,
    0x0397, 0xa48a, 0xca08, 0xa572, 0x23fb, 0xc990, 0x0ef7, 0x1995, 0x0c7d, 0xb109, 0x1c17, 0xdbd8, 0x6412, 0x55a4, 0xf3d4, 0xe130,
    0x2779, 0x0f3e, 0xc157, 0x4168, 0x7b8f, 0x37eb, 0x9d17, 0xcf0b, 0xf356, 0x63b2, 0x8235, 0x12fb, 0xd956, 0xc88a, 0x05e6, 0xb3c1,
    0xf6c9, 0xa90a, 0x97f7, 0x85a5, 0xf55a, 0x0984, 0x1dd7, 0x0a13, 0xb95d, 0xc01b, 0x1c2f, 0xe3e0, 0xd5bf, 0xed17, 0xcc2a, 0xe16a,
    0x7d23, 0xfd7d, 0xa6fb, 0x996f, 0xf35f, 0x6abb, 0x126f, 0x4dc2, 0x1d51, 0x8c95, 0x5c39, 0xf71a, 0x6bd2, 0x6a0d, 0xa4d9, 0x995b,
    0xc76b, 0x1b6e, 0xd590, 0xc238, 0x1d1a, 0xc7de, 0xaedb, 0x3117, 0x07d1, 0xa6e0, 0x8274, 0x53ba, 0x8bf0, 0x4e6d, 0x81e3, 0xf730,
    0x41f8, 0xeb1f, 0xa218, 0x3ea0, 0x4f0f, 0xf28a, 0xae65, 0x8fa9, 0x5318, 0x2952, 0xca77, 0xda0d, 0xa0cc, 0xc862, 0xed0e, 0xd533,
    0x619b, 0x890a, 0x9681, 0xe2d8, 0xfc8c, 0x4601, 0x65d7, 0x816a, 0x7eb9, 0x54fa, 0xbc81, 0x49e0, 0x7b5f, 0xe73b, 0x4a48, 0xe0ea,
    0xeca8, 0x629e, 0xbf12, 0xe96e, 0xf17f, 0x688d, 0x064f, 0x2975, 0xed50, 0x8b6d, 0xd3f0, 0xc462, 0x217a, 0x6a07, 0xaed3, 0x391f,
    0x8781, 0xf368, 0x5d8c, 0x53a4, 0x95ee, 0xbeaa, 0x40dd, 0xdf31, 0xc9d7, 0x49b0, 0x2b0f, 0xb53c, 0x6d0e, 0xd0eb, 0xec64, 0xae52,
    0xb89e, 0x12d3, 0xf17e, 0x698c, 0x1645, 0x23c4, 0xf6af, 0xcf6c, 0x9431, 0x707e, 0x7d5f, 0x8101, 0x15d2, 0x874e, 0x3ca7, 0x6a1e,
    0xb7ca, 0xb9ee, 0x73a8, 0x9894, 0x19af, 0x3647, 0x20b0, 0xb1c6, 0xd3d8, 0xec4a, 0x807c, 0x79a4, 0x3ed6, 0x3979, 0xe1e7, 0xf0ae,
    0xa857, 0xdba1, 0x1d6b, 0xb6af, 0xcd80, 0x5acb, 0x63d2, 0xe255, 0x7101, 0x132b, 0x188d, 0x056e, 0x3b49, 0xf3c1, 0xf425, 0x67f0,
    0x845b, 0x1aaf, 0x055a, 0x0f7d, 0x8214, 0x33da, 0xe80a, 0x8410, 0x51e4, 0xf7b8, 0xc970, 0xee17, 0xff37, 0xcea7, 0x4ef1, 0x1d7f,
    0xa2bb, 0x9d03, 0xdb1f, 0xa3d5, 0xe266, 0x4232, 0x12c8, 0xea65, 0xc969, 0xf70e, 0x7fc6, 0x3a8e, 0x250d, 0x595c, 0xc758, 0x285d,
    0xd473, 0x30d0, 0xd11d, 0x0b99, 0x22dc, 0xffbc, 0x452c, 0x7be7, 0x5f83, 0x7ebd, 0x50fe, 0xfca9, 0x6324, 0x14a3, 0xe734, 0x4547,
    0x108c, 0x8c37, 0xfe9b, 0x7300, 0x303c, 0x3df1, 0x2d43, 0x9f4a, 0xb040, 0x4455, 0x1395, 0xa633, 0x51a7, 0xb4fb, 0xbbc2, 0x7d92,
    0x4ccc, 0x0254, 0x7642, 0x2759, 0x2f1e, 0xe001, 0x0743, 0x3472, 0x3793, 0xe56f, 0x3c0a, 0xc7b3, 0xc3b6, 0x829f, 0xb851, 0xdd1c,
    0xc6ec, 0x8de2, 0x3a45, 0xeec6, 0x2ee6, 0x09f2, 0x6ba1, 0x197e, 0xe796, 0xe7e5, 0x9496, 0xd7d9, 0xa967, 0xfa9a, 0x362d, 0x4ada,
    0x7278, 0x594f, 0xd44b, 0x08e8, 0x60b0, 0xb32a, 0x1d22, 0xffe6, 0x1f76, 0x89a4, 0x382f, 0xa6ba, 0xd82e, 0xa1f9, 0xec5c, 0x966a,
    0x0933, 0xaa60, 0xce80, 0x69d6, 0x4c1f, 0xd187, 0x9103, 0x176b, 0x1ce1, 0x2d2e, 0xf227, 0x03c8, 0xfbd5, 0x6869, 0xe2ab, 0x8fff,
    0x054e, 0x1b69, 0xd297, 0xb20e, 0x280d, 0x8423, 0x62d7, 0xf65b, 0x3b98, 0x2210, 0x3370, 0x42a0, 0x805a, 0x5f82, 0x7fbc, 0x40f4,
    0xf618, 0x78db, 0x50a2, 0xa0f5, 0xf15b, 0x4ca9, 0x6731, 0x459a, 0xcd51, 0x8b1a, 0xa487, 0xc705, 0x7500, 0x5606, 0x626b, 0x4ae7,
    0x4f45, 0xb8c0, 0x4c8d, 0x4315, 0x24e4, 0xa1be, 0xab1b, 0xa4f0, 0xb072, 0x7667, 0x027c, 0x5e6a, 0x865f, 0x3cbd, 0x7004, 0x0725,
    0x5214, 0x3455, 0x10b4, 0xb40f, 0x4f36, 0xcbb3, 0x0fc2, 0x3dab, 0x7719, 0x6d09, 0xd7ec, 0x9c52, 0x9b45, 0xfb63, 0xdedf, 0x3632,
    0x55c5, 0x92b5, 0x92c0, 0xe7b5, 0xc4c6, 0x85de, 0x8e21, 0xca9b, 0x36e1, 0x8616, 0x75f4, 0xa2f2, 0xd44a, 0x09e9, 0x70ba, 0xb99b,
    0x06dd, 0xbbe7, 0x58b7, 0x3db8, 0x640a, 0x4dbc, 0x632f, 0x1fa8, 0x577a, 0x0f1c, 0xe375, 0x402a, 0x28c6, 0x4fe8, 0x156d, 0x38f1,
    0x7864, 0xef1d, 0xe436, 0x7458, 0x1f55, 0xaa87, 0x2967, 0xff42, 0xbbd2, 0x6d82, 0x5c67, 0xa944, 0xd9b9, 0x2765, 0x1322, 0x1184,
    0x9534, 0x6470, 0x37c6, 0xb03a, 0x3e2f, 0xc080, 0x87b4, 0xc65d, 0x3c53, 0x9eea, 0x01eb, 0xfae0, 0x4c57, 0x99cf, 0x53ff, 0xceb5,
    0x5ce3, 0x2dc0, 0x1cc9, 0x0506, 0x5321, 0x106b, 0x6bd0, 0x680f, 0x84cd, 0x8c39, 0xf095, 0x936c, 0x5a12, 0xba0b, 0xa550, 0x01d9,
    0xc8d2, 0x5dbe, 0x6196, 0x8407, 0x46f3, 0x9725, 0x5777, 0x0211, 0x3307, 0x35d7, 0x833d, 0x0bf8, 0x43bd, 0x8c4c, 0x85e0, 0xb01f,
    0x1b0a, 0xb1f4, 0xe1ea, 0xfda3, 0x7825, 0xae5c, 0xb690, 0xf2bf, 0x9b50, 0xee76, 0x9e56, 0xbd57, 0x8e3d, 0xd687, 0xe632, 0x524a,
    0x6a0b, 0xa2df, 0xf967, 0xf8cd, 0x436c, 0x5d9d, 0x42b5, 0x954f, 0x1f0b, 0xf4d9, 0x9b0c, 0xb22a, 0x0c29, 0xe55d, 0x0e38, 0xd65a,
    0x3bef, 0x5567, 0x3017, 0x16da, 0xbc5b, 0x933a, 0x0c44, 0x8830, 0xbdb0, 0x69da, 0x4013, 0x11ff, 0xee4f, 0xa76f, 0x1cf0, 0x3c3f,
    0xf286, 0xa269, 0x4fd1, 0x2c54, 0x9956, 0xca66, 0xcb1c, 0xa06d, 0x69c3, 0x590a, 0x910e, 0x1a66, 0xcc93, 0x58d3, 0x59dc, 0x47d8,
    0xad05, 0xdcd4, 0x1f2f, 0xd0fd, 0xfa72, 0xdec5, 0x2c28, 0xe52a, 0x794f, 0xd53d, 0x6f95, 0x6966, 0xfcaf, 0x6522, 0x749f, 0xd892,
    0x1d45, 0x9881, 0x0cba, 0x76ce, 0xabd5, 0x6a3e, 0x97ea, 0x98b8, 0x3583, 0xd769, 0x19d7, 0x4e3f, 0xd3b1, 0x8523, 0x73dc, 0xece0,
    0x2ad6, 0x7dee, 0x30b0, 0xb17d, 0x6863, 0xe8a1, 0x2fbb, 0x45a4, 0xf36f, 0x5a8b, 0x2392, 0xa0f9, 0xfd57, 0x8cd1, 0x187d, 0xf59e,
    0xcd40, 0x9a0b, 0xa426, 0x66a4, 0xc104, 0x123b, 0x1996, 0x0f7e, 0x8117, 0x03c4, 0xf7d9, 0xa811, 0x9de7, 0x3ffb, 0x055f, 0x0a78,
    0xd236, 0x13af, 0x9c09, 0xc01e, 0x192a, 0xb3c2, 0xf5ca, 0x9914, 0x8824, 0xa9a4, 0x3959, 0xc1c7, 0xd1f8, 0xee7c, 0x945c, 0x1d13,
    0xced7, 0x3e81, 0x6e2e, 0xc3d6, 0xe2ff, 0xdbab, 0x1761, 0x16eb, 0x8d6a, 0xb2cd, 0xebce, 0x73c9, 0xf9f5, 0x6a5f, 0xf68b, 0xeb48,
    0xf54f, 0x1c91, 0x5d5e, 0x8176, 0x62a5, 0x8429, 0x68dd, 0x561f, 0x7b72, 0xca16, 0xbb6c, 0xd33c, 0x08ae, 0x26f6, 0x91ba, 0xaed2,
    0x381e, 0x978b, 0xf9d9, 0x4673, 0x17a5, 0xd22f, 0x0ab6, 0x1cf8, 0x3437, 0x72d6, 0xf7e1, 0x9029, 0x2c4a, 0x8748, 0x3aa1, 0x0a22,
    0x886c, 0xe1ec, 0xfba5, 0x1819, 0x91fa, 0xee92, 0x7ab2, 0x1bdd, 0x6623, 0x4683, 0xe755, 0x2426, 0x637c, 0x4cfb, 0x3563, 0x3789,
    0xff75, 0x8ce5, 0x2c49, 0x844b, 0x0abf, 0x15f1, 0xa46d, 0x2def, 0x33e6, 0xd436, 0x7595, 0xc393, 0xa7ba, 0xc925, 0xbb42, 0xfd12,
    0xc994, 0x0af3, 0x59bd, 0x26b9, 0xdef5, 0x1c18, 0xd4d7, 0x9474, 0x353b, 0x6fd1, 0x2d22, 0xfe2b, 0xc3b0, 0x8499, 0xd86d, 0xe2ba,
    0x9eee, 0x05ef, 0xbac8, 0x6693, 0xf633, 0x53f0, 0xc1ba, 0xac85, 0x4d5f, 0x80cc, 0xc914, 0x8a73, 0xdce5, 0x2e1e, 0xf10a, 0x1df8,
    0x253c, 0x686d, 0xe6af, 0xcfd7, 0x2f8a, 0x7495, 0xd298, 0xbd01, 0xd86b, 0xe4bc, 0xfed2, 0x3a49, 0xe2ca, 0xee9e, 0x76be, 0xdba5,
    0x196f, 0xf687, 0xe744, 0x3537, 0x63dd, 0xed5a, 0x8167, 0x73b4, 0x8488, 0xc97c, 0xe21b, 0x3f4f, 0xb1eb, 0xfef5, 0x1d6e, 0xb3aa,
    0x9da2, 0x7abe, 0x17d1, 0xa65b, 0x39cf, 0x5751, 0x2437, 0x726d, 0x4c5a, 0x94c2, 0x838d, 0xbb48, 0xf718, 0x69d0, 0x4a19, 0xb1bb,
    0xaea5, 0x4f69, 0x94ec, 0xada3, 0x7a72, 0xdb1d, 0xa1d7, 0xc272, 0x5750, 0x2536, 0x6267, 0x46eb, 0x8f3d, 0xc78c, 0xfc89, 0x4304,
    0x35f5, 0xa11f, 0x0aba, 0x10f4, 0xf44f, 0x0d9a, 0x47e5, 0x9038, 0x3d5b, 0x87e9, 0x9b00, 0xbe26, 0xcc51, 0x9a11, 0xbe3c, 0xd64b,
    0x2afe, 0x55c6, 0x91b6, 0xa2de, 0xf866, 0xe8c7, 0x49dd, 0x4662, 0x06b4, 0xd28e, 0xab17, 0xa8fc, 0x700a, 0x092b, 0xb278, 0x5e7b,
    0x974e, 0x3c1c, 0xd1a5, 0xb321, 0x1629, 0x4fa8, 0x552d, 0x7a5d, 0xf432, 0x70e7, 0xe4c6, 0x84a8, 0xe95c, 0xc34d, 0x7964, 0xfe16,
    0xfe8d, 0x6516, 0x40ab, 0xa947, 0xdaba, 0x177b, 0x0cf1, 0x3d85, 0x5937, 0xac33, 0xfbe9, 0x5455, 0x132e, 0x1d88, 0x554c, 0x1b3c,
    0x87c2, 0xb02b, 0x2f3e, 0xc021, 0x2615, 0x7259, 0x786e, 0xe517, 0x4472, 0x34b2, 0xf753, 0x229b, 0xb8fb, 0x77b6, 0xc2a6, 0x8384,
    0xb241, 0x6742, 0x36e9, 0x8e1e, 0xf5a4, 0xf77a, 0x0bb2, 0x09f7, 0x6ea4, 0x495c, 0xc7e3, 0x93e6, 0xd098, 0x9f17, 0xed1d, 0xc620,
    0x412e, 0x3dc9, 0x157b, 0x2ee7, 0x08f3, 0x7bab, 0x13cf, 0xfc69, 0xa3e4, 0xd357, 0x63c5, 0xf542, 0x119c, 0x8d2c, 0xf48b, 0xc95e,
    0xc039, 0x3e0d, 0xe2a2, 0x86f6, 0x9514, 0x4450, 0x1690, 0xf611, 0x71d2, 0xc0f8, 0xffcc, 0x355c, 0x08b6, 0x3eee, 0x0141, 0x504a,
    0x481d, 0x97a9, 0xdbfb, 0x4731, 0x44ec, 0xaa2c, 0x82cc, 0xeb02, 0xbf05, 0xfe79, 0x91e2, 0xf68a, 0xea49, 0xe545, 0x1620, 0x46a1,
    0xc577, 0x2564, 0x3035, 0x34f8, 0xbd19, 0xc073, 0x7447, 0x004a, 0x4a4a, 0xe2e8, 0xccbc, 0x77fc, 0x88ec, 0x616c, 0x7efd, 0x10be,
    0xbe05, 0xef72, 0x8b59, 0xe7c4, 0xb5b7, 0xe685, 0xe5fd, 0xae98, 0x7254, 0x7563, 0x3565, 0x318f, 0x9f49, 0xb343, 0x744b, 0x0c46,
    0x8a32, 0x9da4, 0x7cb8, 0x77ed, 0x99fd, 0x61cd, 0xdf5c, 0xa4ba, 0xfa38, 0x948f, 0xcec0, 0x2996, 0x0eb3, 0x5dd1, 0x0ef9, 0x179b,
    0xec11, 0xdb27, 0x9bed, 0x53cb, 0xfa81, 0x2d36, 0xea3f, 0x9333, 0x054d, 0x186a, 0xe289, 0xaddd, 0x040c, 0x4820, 0xaa94, 0x3a74,
    0xdff7, 0x0f11, 0xee78, 0x9058, 0x5d3b, 0xe413, 0x517d, 0x6e21, 0xccd9, 0x1299, 0xbb34, 0x8b64, 0xdaf9, 0x5438, 0x7e43, 0xae00,
    0xeacc, 0x60c0, 0xc35a, 0x6e73, 0x9e8b, 0x608a, 0x8910, 0x8c9b, 0x5237, 0x1776, 0x01fc, 0xedf7, 0x2cca, 0x07c8, 0xbff9, 0x0285,
    0xa793, 0xe00c, 0x0a4e, 0xe400, 0x426e, 0x4e94, 0x781a, 0x9163, 0x770b, 0x7f1b, 0xe753, 0x2220, 0x0340, 0x735d, 0x6d61, 0xbf84,
    0x7ff8, 0x04b0, 0xf49c, 0xde49, 0xa0a4, 0xa00a, 0x0ea4, 0x4ac6, 0x6e64, 0x899c, 0x0017, 0x1717, 0x609d, 0x9e07, 0xec06, 0xcc30,
    0xfb70, 0xcdcc, 0x1687, 0xe106, 0x114f, 0x5eff, 0x13ca, 0xf96c, 0xf3c6, 0xf322, 0x17c6, 0xb14c, 0x5952, 0xc956, 0xc831, 0xbe5d,
    0xb72a, 0x590e, 0x950a, 0x5a4e, 0xe657, 0x372f, 0x59d3, 0x48d7, 0x5d63, 0xbc4b, 0x832a, 0x1cef, 0x2320, 0x124b, 0x69e6, 0x7c2f,
    0xe07a, 0x7c38, 0xf76d, 0x1ca5, 0x696a, 0xf0a3, 0xa55a, 0x0bd3, 0x6896, 0x1d54, 0x8990, 0x0c1b, 0xd76f, 0x1fd1, 0x2e03, 0xec17,
    0xdd21, 0xfbd1, 0x6c6d, 0xa283, 0xa53b, 0x6ab2, 0x1b66, 0xdd98, 0x4268, 0x4892, 0x1826, 0xaec5, 0x2f09, 0xf716, 0x67de, 0xaa75,
    0xdb95, 0x295f, 0xc77a, 0x0a7f, 0xd531, 0x6399, 0xa91e, 0x83e3, 0xd526, 0x748e, 0xc983, 0x1de4, 0x3920, 0xb8be, 0x32f3, 0xd028,
    0x2fa7, 0x59b8, 0x23bc, 0x8ed7, 0x3c6d, 0xa0d4, 0xd07a, 0x7df5, 0x2bab, 0x1198, 0x8928, 0xb4a3, 0xe39a, 0xafc5, 0x3e02, 0xedad,
    0x7690, 0xf58b, 0xd855, 0xda82, 0x2f43, 0xbd5c, 0x8536, 0x66c9, 0xac69, 0xa1b3, 0xa616, 0x7482, 0xc58f, 0xdd9c, 0x466c, 0x08ba,
    0x32e2, 0xc139, 0x2f06, 0xf819, 0x97b8, 0xcaea, 0x4790, 0xe54d, 0x1e28, 0xc6f1, 0x90ff, 0xfa9c, 0x302b, 0x2ae6, 0x4dde, 0x014d,
    0x5c46, 0x8865, 0xe8e5, 0x6bff, 0x4720, 0x55fd, 0xaa8d, 0x236d, 0x5f06, 0xfb38, 0x8584, 0xd47b, 0x38d8, 0x514d, 0x5e11, 0xfd24,
    0xffa2, 0x5b32, 0x8b20, 0x9ebd, 0x56bc, 0xd8d1, 0x5e06, 0xea33, 0x9f3f, 0xc535, 0x6726, 0x528d, 0xadcc, 0x151d, 0x4881, 0x0b35,
    0x8e70, 0x9bca, 0x74ec, 0xabe1, 0x5e0a, 0xe63f, 0x5f47, 0xba79, 0xd722, 0x529c, 0xbcdd, 0x15bc, 0xe920, 0xbf31, 0xca4d, 0xe037,
    0x3175, 0x65b3, 0xe50e, 0x5d6b, 0xb443, 0x037a, 0x4967, 0xfcd8, 0x1255, 0x77f8, 0x8ce8, 0x2144, 0x5439, 0x7f42, 0xbe0a, 0xe07d,
    0x7b3f, 0x875b, 0x29b2, 0x2a97, 0x3caf, 0x6216, 0x379a, 0xec66, 0xac50, 0x988a, 0x07b1, 0xc680, 0xe18e, 0x99c7, 0x5bf7, 0x4ee5,
    0x096b, 0xf238, 0x1cd7, 0x1b18, 0xa3e6, 0xd155, 0x43d1, 0xe020, 0x2662, 0x052e, 0x7b09, 0xb16d, 0x7873, 0xf80a, 0x84ab, 0xea5f,
    0xf353, 0x66b7, 0xd217, 0x328e, 0xad55, 0x8c84, 0x4d28, 0xf7bb, 0xca73, 0xde09, 0xe0e4, 0xe2a6, 0x82f2, 0xd53c, 0x6e94, 0x796c,
    0xf61e, 0x7edd, 0x309e, 0x9f53, 0xa959, 0xc4a4, 0xe7bc, 0xcdcf, 0x1584, 0xd118, 0x0e9c, 0x72fe, 0xdfc9, 0x312f, 0x3fe9, 0x174d,
    0x3ac7, 0x6c44, 0x8baa, 0x1437, 0x73a0, 0x909c, 0x99ff, 0x63cf, 0xff48, 0xb1d8, 0xcdc6, 0x1c8d, 0x4142, 0x51a5, 0xb6f9, 0x9bd6,
    0x68f0, 0x7b32, 0x8a56, 0xf9c0, 0x5f6a, 0x9754, 0x2606, 0x614a, 0x58db, 0x51d4, 0xc788, 0xf88d, 0x032c, 0x1f31, 0xcee3, 0x0ab5,
    0x1ffb, 0x0429, 0x6d05, 0xdbe0, 0x5c2a, 0xe409, 0x4b67, 0xdece, 0x2723, 0x5564, 0x3314, 0x26c4, 0xa388, 0xbf3b, 0xc047, 0x4073,
    0x719f, 0x8db5, 0x6d12, 0xccf7, 0x3cb7, 0x7a0e, 0xa761, 0x12fe, 0xdc53, 0x98a8, 0x2593, 0xc7c2, 0xb2c7, 0xe1c4, 0xd38d, 0xb91f,
    0x8259, 0x7e97, 0x7ad4, 0x7dbb, 0x65e5, 0xb358, 0x6f50, 0xaca3, 0x6b79, 0xc1a6, 0xb099, 0x9d8c, 0x5490, 0xd6eb, 0x8a5e, 0xf1c8,
    0xdf3a, 0xc2dc, 0xf9fe, 0x6154, 0x46c5, 0xa113, 0x06b6, 0xd08c, 0x8b03, 0xbd9e, 0x47f4, 0x8129, 0x3dfa, 0x2648, 0x2f04, 0xfa1b,
    0xb7ac, 0xdf88, 0x706e, 0x6d4f, 0x91aa, 0xbec2, 0x28b5, 0x3c9b, 0x5622, 0x464f, 0x2b99, 0x23aa, 0x98c1, 0x4cfa, 0x3462, 0x2783,
    0xf5c4, 0x971a, 0x6848, 0xc38a, 0xbea3, 0x49d4, 0x4f6b, 0x96ee, 0x8db7, 0x6f10, 0xece3, 0x29d5, 0x4df0, 0x2f63, 0x9d7c, 0xa460,
    0x20e2, 0xe394, 0xa1cb, 0xde6e, 0x8783, 0xf16a, 0x7d98, 0x46c6, 0xa210, 0x36a8, 0xcf5f, 0xa702, 0x719d, 0x8fb7, 0x4d06, 0xd995,
    0x0b49, 0xf20c, 0x28e3, 0x6acd, 0x6419, 0x5eaf, 0x439a, 0xab6b, 0xd480, 0xc323, 0x170a, 0x7d80, 0x5ede, 0x32eb, 0xc830, 0xbf5c,
    0xa720, 0x53bf, 0x8ef5, 0x1e4f, 0xa196, 0x8333, 0x05f6, 0xa3d1, 0xe662, 0x021a, 0x380c, 0x8599, 0xc966, 0xf801, 0x8fa0, 0x5a11,
    0xb908, 0x954e, 0x1e0a, 0xe4d3, 0x91bd, 0xa9d5, 0x4828, 0xa29c, 0xba24, 0x8a7f, 0xd0e9, 0xee66, 0x8e46, 0xadfc, 0x252d, 0x797c,
    0xe60e, 0x6e76, 0x9b8e, 0x30a8, 0xa965, 0xf898, 0x1639, 0x5fb8, 0x4586, 0xd14d, 0x5bc9, 0x70db, 0xd8fa, 0x752d, 0x7b2b, 0x934f,
    0x7931, 0xab43, 0xfca8, 0x6225, 0x04a9, 0xed85, 0x5eb8, 0x548d, 0xcbf6, 0x4a87, 0x2f25, 0xdb3a, 0x86f0, 0x9312, 0x246c, 0x2936,
    0xae13, 0xf9df, 0x4075, 0x7799, 0xed89, 0x52b4, 0x94f5, 0xb4ba, 0xfa83, 0x2f34, 0xca2b, 0x8651, 0x32b3, 0x9068, 0x6d0b, 0xd5ee,
    0xbc46, 0x8e27, 0xcc9d, 0x56dd, 0xb9b0, 0x2df6, 0x2aff, 0x54c7, 0x81bc, 0xa86f, 0xe399, 0xacc6, 0x0e1c, 0xf27e, 0x5a91, 0x3988,
    0x1016, 0x16ad, 0xcb2c, 0x905d, 0x583e, 0xb431, 0x7108, 0x1a22, 0x88d7, 0x5a57, 0xff4e, 0xb7de, 0xadfa, 0x232b, 0x1940, 0xd9a8,
    0x3674, 0x1383, 0xb025, 0x2130, 0x204d, 0x4c3b, 0xf5a3, 0xf07d, 0x7b84, 0x3ce0, 0x2d59, 0x8550, 0x00af, 0xafaf, 0x5468, 0x2e13,
    0xfc07, 0xcd8a, 0x50c1, 0xc396, 0xa2bf, 0x9907, 0x9b37, 0x8911, 0x8d9a, 0x423d, 0x1dc7, 0x1a03, 0xa9f6, 0x6b0b, 0xb3d4, 0xe3dc,
    0xe983, 0x1c92, 0x5e5d, 0xb168, 0x7d76, 0xa828, 0xa4de, 0x9e5c, 0xb75d, 0x2e79, 0x966d, 0x0e34, 0xda56, 0xfb97, 0x2a2b, 0x8013,
    0x16cb, 0xad4a, 0x939b, 0xade5, 0x3c34, 0xf98d, 0x1227, 0x058a, 0xdfad, 0x554b, 0x1c3b, 0xf7f4, 0x853c, 0x6cc3, 0x0c2d, 0xe159,
    0x4e10, 0xfc9e, 0x5413, 0x5568, 0x3f18, 0xe6bc, 0xdcc4, 0x0f3f, 0xc056, 0x5162, 0x713e, 0x2c14, 0xd916, 0x88ca, 0x474a, 0x3f97,
    0x6933, 0xa9fa, 0x6707, 0x73ac, 0x9c90, 0x5987, 0x1c83, 0x4f4c, 0xb1c9, 0xdcd7, 0x1c2c, 0xe0e3, 0xe5a1, 0xf2c4, 0xe02b, 0x2d69,
    0xb560, 0x3152, 0x4294, 0xb46e, 0x2e57, 0xb843, 0xcf0e, 0xf653, 0x3390, 0xa240, 0x66f8, 0x9d58, 0x8044, 0x419c, 0x8f7b, 0x81ca,
    0xde19, 0xf0f4, 0xf20d, 0x29e2, 0x7ac7, 0x6ea8, 0x4550, 0x079b, 0xecaa, 0x609c, 0x9f06, 0xfc0c, 0xc681, 0xe08f, 0x89cd, 0x5146,
    0x551a, 0x4d6a, 0xb5f9, 0xa8cb, 0x473d, 0x48e0, 0x6a54, 0xfd80, 0x5b06, 0xbf14, 0xef68, 0x9143, 0x572b, 0x5e4d, 0xa178, 0x6ddd,
    0x0338, 0x0b25, 0x9e60, 0x8b61, 0xdffc, 0x041a, 0x5e36, 0xda03, 0xaec2, 0x280e, 0x8720, 0x52c9, 0xe988, 0x1799, 0xee13, 0xfb33,
    0x8e8f, 0x6435, 0x7283, 0xa2b4, 0x920c, 0x2b79, 0xc34a, 0x7e63, 0x8e20, 0xcb9a, 0x26eb, 0x8ca7, 0x6e0b, 0xe6f3, 0x938b, 0xbdf5,
    0x2c9f, 0x529d, 0xbddc, 0x05b6, 0xe391, 0xa4ce, 0x8e4c, 0xa7f6, 0x8569, 0x3996, 0x0e08, 0xe66a, 0x0a12, 0xb85c, 0xd011, 0x169e,
    0xf81f, 0x91be, 0xaad6, 0x7836, 0xbd4f, 0x9625, 0x467c, 0x18aa, 0x2249, 0x6a29, 0x80fd, 0xf825, 0xab84, 0x3b6f, 0xd5e7, 0xb54f,
    0x1e7d, 0x93a4, 0x92da, 0xfdaf, 0x7429, 0x6e24, 0xc9dc, 0x42bb, 0x9b41, 0xff67, 0x9ef7, 0x1cf6, 0x3a39, 0x92ba, 0x9dcf, 0x17d3,
    0xa459, 0x19db, 0x4233, 0x13c9, 0xfa6f, 0xc3d8, 0xecf1, 0x3bc7, 0x7d4f, 0x9111, 0x0579, 0x2c5e, 0x935c, 0x6a22, 0x8bf6, 0x486b,
    0xe1df, 0xc896, 0x19fa, 0x6312, 0x2295, 0xb6f5, 0x97da, 0xa888, 0x047e, 0x3a52, 0xf9d1, 0x4e7b, 0x97f5, 0x87a7, 0xd54e, 0x1ce6,
    0x2a29, 0x8211, 0x36df, 0xb828, 0xa465, 0x25e7, 0xb3b6, 0x81be, 0xaa6d, 0xc38d, 0xb9a4, 0x39e2, 0x7a7c, 0xd513, 0x41bb, 0xa85c,
    0xd0aa, 0xad25, 0xfcf4, 0x3e79, 0x96d6, 0xb58f, 0xdebd, 0x5450, 0x162b, 0x4daa, 0x7539, 0x6f3f, 0xc3cc, 0xf8e5, 0x6b44, 0xfc9b,
    0x5116, 0x054a, 0x1f6d, 0x92bf, 0x98ca, 0x47f1, 0x842c, 0x6dd8, 0x063d, 0x5b07, 0xbe15, 0xff62, 0x9bf2, 0x4cd4, 0x1a4c, 0xe6b9,
    0xd9c1, 0x5f1d, 0xe023, 0x2561, 0x3530, 0x64da, 0x9d6c, 0xb470, 0x3049, 0x4884, 0x0e30, 0xde52, 0xbbbf, 0x00ef, 0xefef, 0x16c4,
    0xa245, 0x63fd, 0xcd7a, 0xa031, 0x359f, 0xcb75, 0xc904, 0x9a63, 0xcc4e, 0x850e, 0x5ef1, 0x1dc4, 0x1900, 0x99e8, 0x74d8, 0x9fd5,
    0x2fdf, 0x21c0, 0xd0bd, 0xba32, 0x9c69, 0xa07e, 0x7ad0, 0x79bf, 0x25cd, 0x999c, 0x00ac, 0xacac, 0x6476, 0x31c0, 0xd006, 0x0189,
    0x9882, 0x0fb9, 0x46d0, 0xb406, 0x463f, 0x5be9, 0x50fb, 0xf9ac, 0x3306, 0x34d6, 0x9337, 0x0149, 0x5842, 0xc84d, 0xc221, 0x0403,
    0x472f, 0x5af2, 0x5aeb, 0x43f2, 0xc303, 0x372a, 0x5cd6, 0x18f5, 0x7d16, 0xc848, 0xc724, 0x5421, 0x675a, 0x2ef1, 0x1ee5, 0x0b3c,
    0x8779, 0x0b90, 0x2bd5, 0x6fe6, 0x1a15, 0xbfe0, 0x1b9c, 0x2762, 0x1425, 0x61b2, 0xa023, 0x278d, 0xfbca, 0x7776, 0x0266, 0x4470,
    0x36b0, 0xd747, 0x37f9, 0x8f05, 0xffb4, 0x4d24, 0xfbb7, 0x0a0b, 0xa145, 0x50e0, 0xe2b7, 0x93e3, 0xd59d, 0xcf35, 0xcd68, 0xb223,
    0x0520, 0x7507, 0x5101, 0x125d, 0x7ff0, 0x0cb8, 0x74cc, 0x8bc1, 0x7f5c, 0xa014, 0x10ba, 0xba01, 0xaf5a, 0xa19d, 0x8838, 0xb5b8,
    0xe98a, 0x159b, 0xce07, 0xee51, 0xb971, 0xec37, 0xfd01, 0xda87, 0x2a46, 0xed7e, 0xa543, 0x12ca, 0xe867, 0xe97d, 0xe26c, 0x4838,
    0xb28c, 0xaa8f, 0x216f, 0x7f12, 0xee5a, 0xb27a, 0x5c79, 0xb75a, 0x297e, 0xe65b, 0x3b23, 0x99ab, 0x379b, 0xed67, 0xbc5a, 0x923b,
    0x1c4e, 0x8281, 0xa64f, 0x2ddb, 0x07d2, 0xa5e3, 0xb26a, 0x4c69, 0xa7f1, 0x826e, 0x49a0, 0x3b1f, 0xa597, 0xc61e, 0x7f10, 0xec58,
    0x926e, 0x491b, 0x80a4, 0xa17c, 0x69d9, 0x4310, 0x21e1, 0xf19c, 0x8b6e, 0xd0f3, 0xf47c, 0x3ea9, 0x4606, 0x62d0, 0xf15c, 0x4bae,
    0x1707, 0x708d, 0x8eac, 0x4716, 0x63cb, 0xfb4c, 0xf1f0, 0xe702, 0x7371, 0x414d, 0x5eaa, 0x469f, 0xfb49, 0xf4f5, 0xb720, 0x5304,
    0x354e, 0x1aa4, 0x0e51, 0xbf33, 0xc84f, 0xc023, 0x2417, 0x524d, 0x6d0c, 0xd2e9, 0xcc70, 0xbb30, 0x8f60, 0x9ad1, 0x7efc, 0x11bf,
    0xae0f, 0xe5c3, 0x90a6, 0xa3c5, 0xf276, 0x5299, 0xb9d8, 0x459e, 0xc955, 0xcb32, 0x8e43, 0xa8f9, 0x750f, 0x5909, 0x920d, 0x2a78,
    0xd340, 0x74d2, 0x95df, 0x8f9b, 0x612a, 0x38bb, 0x322e, 0x0df5, 0x288a, 0x03a4, 0x97b9, 0xcbeb, 0x579a, 0xeffc, 0x05d7, 0x82f0,
    0xd73e, 0x4e80, 0x6c0e, 0xc1e0, 0xf6df, 0xbf1c, 0xe760, 0x1113, 0x02a3, 0x81b5, 0xa166, 0x73c3, 0xf3ff, 0xca1b, 0xb661, 0x034e,
    0x7d53, 0x8d0d, 0xd5aa, 0xf802, 0x8ca3, 0x6a0f, 0xa6db, 0xb94f, 0xd209, 0x2c90, 0x5d92, 0x4dba, 0x6529, 0x7f94, 0x68dc, 0x571e,
    0x6b78, 0xc0a7, 0xa093, 0x973d, 0x4f6f, 0x92ea, 0xcd9f, 0x45d4, 0x831f, 0x29da, 0x42ff, 0xdf05, 0xfde3, 0x3865, 0xecf0, 0x3ac6,
    0x6d45, 0x9ba0, 0x1e86, 0x685f, 0xd49d, 0xde3e, 0xd7d3, 0xa36d, 0x5ade, 0x76c7, 0xa2dc, 0xfa64, 0xc8d3, 0x5cbf, 0x719c, 0x8eb6,
    0x5d0c, 0xd324, 0x10b6, 0xb60d, 0x6f22, 0xded1, 0x383c, 0xb5a9, 0xf89b, 0x153a, 0x6fa6, 0x5a55, 0xfd4c, 0x97ca, 0xb898, 0x14d5,
    0x9142, 0x562a, 0x4e47, 0xabc9, 0x7622, 0x4739, 0x4ce4, 0x2a7c, 0xd744, 0x34fa, 0xbf1b, 0xe067, 0x6125, 0x37b4, 0xc248, 0x6d6a,
    0xb48f, 0xcfb6, 0x4eeb, 0x0765, 0x1254, 0x76f9, 0x9ce2, 0x2bf5, 0x4fc6, 0x3b43, 0xf9cb, 0x5461, 0x271a, 0x6c5d, 0x92b3, 0x94c6,
    0x8789, 0xfb60, 0xdddc, 0x062c, 0x4a16, 0xbeb4, 0x5ec3, 0x2ff6, 0x08e9, 0x61b1, 0xa320, 0x1793, 0xe419, 0x5b77, 0xce65, 0x8c33,
    0xfa9f, 0x3328, 0x1af8, 0x520d, 0x2d4c, 0x9045, 0x4026, 0x24ca, 0x8f90, 0x6a21, 0x88f5, 0x7875, 0xfe0c, 0xe497, 0xd5f9, 0xab51,
    0xeeba, 0x529a, 0xbadb, 0x7580, 0xd686, 0xe733, 0x4240, 0x60ba, 0xb920, 0xbd66, 0xbf0c, 0xf770, 0x01b8, 0xa9b3, 0x2e4e, 0xa15a,
    0x4fff, 0x027a, 0x586c, 0xe663, 0x031b, 0x2806, 0x8f28, 0xd299, 0xbc00, 0xc861, 0xee0d, 0xe52d, 0x7e48, 0xa50b, 0x5a82, 0x2a9b,
    0x30a3, 0xa26e, 0x48d6, 0x5c62, 0xac41, 0x899b, 0x0710, 0x6721, 0x558a, 0xddfa, 0x200a, 0x0b7c, 0xc739, 0x493c, 0xa783, 0xf01c,
    0x1ae5, 0x4f10, 0xed95, 0x4ea8, 0x4426, 0x60e6, 0xe57c, 0x2f19, 0xe706, 0x7775, 0x0165, 0x746e, 0x2963, 0xfb46, 0xfbfa, 0x4746,
    0x339b, 0xa94b, 0xd6b6, 0xd703, 0x73bd, 0x8d81, 0x5926, 0xbd22, 0xfb48, 0xf5f4, 0xa72a, 0x59b5, 0x2eb1, 0x5ea5, 0x4990, 0x0b2f,
    0x946a, 0x2b25, 0x9f16, 0xec1c, 0xd62a, 0x4b9f, 0x2636, 0x517a, 0x6926, 0xbcef, 0x278e, 0xf8c9, 0x4768, 0x1db5, 0x6871, 0xfab3,
    0x1f04, 0xfbd6, 0x6b6a, 0xd2b5, 0x902c, 0x294f, 0xd76a, 0x1ad4, 0x7e21, 0xcc62, 0xa922, 0xbfdf, 0x24a3, 0xe6f9, 0x9981, 0x1db1,
    0x6c75, 0xba9b, 0x35c0, 0x942a, 0x6b65, 0xddba, 0x604a, 0x49d0, 0x4b6f, 0xd6c6, 0xa773, 0x00ec, 0xecec, 0x26da, 0xbd96, 0x4ffc,
    0x0179, 0x6872, 0xf9b0, 0x2f1a, 0xe405, 0x476b, 0x1eb6, 0x586f, 0xe560, 0x3305, 0x37d5, 0xa329, 0x1e9a, 0x7443, 0x044e, 0x0a62,
    0xc82c, 0xa340, 0x77f3, 0x87e3, 0x910a, 0x1e62, 0x8cbb, 0x7217, 0x3620, 0x47d7, 0xa20a, 0x2cb2, 0x7fb0, 0x4cf8, 0x3660, 0x0797,
    0xe0a6, 0xa0e4, 0xe04a, 0x4c08, 0xc690, 0xf19e, 0x896c, 0xf0e7, 0xe11e, 0x0957, 0xce04, 0xed52, 0x896f, 0xf3e4, 0xd100, 0x1684,
    0xe205, 0x2151, 0x412c, 0x3fcb, 0x356f, 0x3b85, 0x3f0d, 0xf3a9, 0x9c4d, 0x845a, 0x1bae, 0x1550, 0x05cc, 0x99eb, 0x77db, 0xafcb,
    0x300c, 0x0dc1, 0x1cbe, 0x7271, 0x5046, 0x4411, 0x57d1, 0xa4b7, 0xf735, 0x44fd, 0xbb3d, 0x826d, 0x4aa3, 0x0b01, 0xba44, 0xea1f,
    0xb313, 0x241b, 0x5e41, 0xad74, 0xada5, 0x7c74, 0xbb21, 0x9e71, 0x9a70, 0xdf5d, 0xa5bb, 0xea32, 0x9e3e, 0xd53f, 0x6d97, 0x4972,
    0xe9cd, 0x52dc, 0xfc9d, 0x5710, 0x6576, 0x20cb, 0xcabd, 0x10c7, 0xc77c, 0x0c79, 0xb50d, 0x5c3f, 0xf11c, 0x0bee, 0x55ab, 0xfcdb,
    0x1156, 0x47e6, 0x933b, 0x0d45, 0x983a, 0xb701, 0x7225, 0x0412, 0x563e, 0x5a53, 0xfb4a, 0xf7f6, 0x873e, 0x4cd7, 0x194f, 0xd6a7,
    0xc612, 0x731c, 0x2c20, 0xed22, 0xf91f, 0x80b5, 0xb06d, 0x6978, 0xe2b1, 0x95e5, 0xb5a1, 0xf093, 0x956a, 0x3a2e, 0x85ad, 0xfd52,
    0x89d4, 0x485f, 0xd5eb, 0xb943, 0xde05, 0xece8, 0x22de, 0xfdbe, 0x6538, 0x6e85, 0x687d, 0xf6bf, 0xdf7c, 0x849a, 0xdb6e, 0xd2a4,
    0x813d, 0x29ee, 0x76cb, 0xaed0, 0x3a1c, 0xb79f, 0xecbb, 0x718d, 0x9fa7, 0x5dad, 0x7285, 0xa4b2, 0xf230, 0x14df, 0x9b48, 0xf66e,
    0x0ead, 0x43cf, 0xfe3e, 0xd6a5, 0xc410, 0x5308, 0x3942, 0xdadc, 0x711d, 0x0f37, 0xc85e, 0xd132, 0x24b6, 0xf3ec, 0xd908, 0x96d4,
    0xb78d, 0xfea9, 0x4132, 0x21d5, 0xc5a8, 0xfabb, 0x170c, 0x7b86, 0x3ee2, 0x0d4d, 0x9032, 0x3751, 0x27ad, 0xdbea, 0x5620, 0x444d,
    0x0b8d, 0x36c8, 0xaf3f, 0xc4f8, 0xbbe0, 0x5fb0, 0x4d8e, 0x511d, 0x0e41, 0xaf23, 0xd8e4, 0x6b33, 0x8bec, 0x5271, 0x5130, 0x236c,
    0x5e07, 0xeb32, 0x8f35, 0xcf84, 0x7cd9, 0x168c, 0xea0d, 0xa101, 0x14a4, 0xe033, 0x3571, 0x259b, 0xcfca, 0x3297, 0xb44c, 0x0c75,
    0xb901, 0x9c47, 0x8e50, 0xbbea, 0x55ba, 0xedca, 0x11f7, 0xe647, 0x273f, 0x4978, 0xe3c7, 0xf298, 0xbc77, 0xbf16, 0xed6a, 0xb157,
    0x4249, 0x69b3, 0x297a, 0xe25f, 0x7b0b, 0xb36f, 0x5867, 0xed68, 0xb355, 0x625d, 0x7cd1, 0x1e84, 0x6a5d, 0xf489, 0xcb5c, 0xe02d,
    0x2b6f, 0xd55c, 0x0ef4, 0x1a96, 0x3c63, 0xaeda, 0x3016, 0x17db, 0xac51, 0x998b, 0x17bb, 0xcc31, 0xfa71, 0xddc6, 0x1c36, 0xfaf9,
    0x554e, 0x193e, 0xa7d6, 0xa549, 0x18c0, 0x4823, 0xa997, 0x0a6a, 0xc024, 0x2310, 0x227b, 0x581b, 0x9114, 0x007c, 0x7c7c, 0xb329,
    0x1e21, 0xcff8, 0x00a5, 0xa5a5, 0xf42c, 0x6ef9, 0x1401, 0x4596, 0xc15d, 0x4b62, 0xdbcb, 0x7701, 0x7511, 0x4717, 0x62ca, 0xeb46,
    0xfb41, 0xfcfd, 0x3770, 0x068c, 0xeab6, 0x1aba, 0x104f, 0x4ff4, 0x0971, 0xe822, 0xac38, 0xf0e2, 0xe41b, 0x5975, 0xee71, 0x9951,
    0xcd61, 0xbb2a, 0x957a, 0x2a3e, 0x9506, 0x5642, 0x262f, 0x4863, 0xe9d7, 0x48c6, 0x4c72, 0xbcea, 0x228b, 0xa8eb, 0x671d, 0x69b6,
    0x2c7f, 0xb27d, 0x5b7e, 0xc76c, 0x1c69, 0xa5a6, 0xf72f, 0x5ee7, 0x0bd2, 0x6997, 0x0d5e, 0x8321, 0x17e4, 0x936e, 0x5810, 0x9a1f,
    0xb032, 0x3627, 0x40d0, 0xd23c, 0x19a5, 0x3c4d, 0x80f4, 0xf12c, 0x3bde, 0x6456, 0x11e0, 0xf150, 0x47a2, 0xd77f, 0x0fc1, 0x3ea8,
    0x4707, 0x72da, 0xfbed, 0x5051, 0x5306, 0x374c, 0x3ab0, 0x1b33, 0x88cd, 0x404d, 0x4fa1, 0x5c24, 0xea07, 0xab0b, 0xb4e0, 0xa0d9,
    0xdd77, 0xad87, 0x5e56, 0xba63, 0xcd38, 0xe273, 0x5727, 0x5241, 0x6100, 0x1291, 0xb33c, 0x0b34, 0x8f71, 0x8bc0, 0x7e5d, 0xb01e,
    0x1a0b, 0xa1fe, 0xeb5b, 0xe65c, 0x3c24, 0xe99d, 0x028c, 0xae9a, 0x7056, 0x5577, 0x2007, 0x0671, 0x174b, 0x3cc1, 0x0c78, 0xb40c,
    0x4c35, 0xfbad, 0x1011, 0x11aa, 0xbb1a, 0xa54a, 0x1bc3, 0x783d, 0xb644, 0x266b, 0x0c27, 0xeb53, 0xee54, 0xbc74, 0xbc15, 0xdd74,
    0xae84, 0x6e48, 0xa5b0, 0xe139, 0x2e70, 0x9f64, 0x9e6e, 0x856f, 0x3f90, 0x6e34, 0xd9cc, 0x5210, 0x3051, 0x509c, 0x9ecb, 0x20ca,
    0xcbbc, 0x00cd, 0xcdcd, 0x1786, 0xf10c, 0x1bfe, 0x4500, 0x57cb, 0xbead, 0x47da, 0xaf07, 0xfcc0, 0x0a4d, 0xe703, 0x7270, 0x5147,
    0x541b, 0x5d60, 0xbf48, 0xb334, 0x033c, 0x0f21, 0xde48, 0xa1a5, 0xb000, 0x0415, 0x5139, 0x2a65, 0xce5d, 0xb40b, 0x4b32, 0x8b9b,
    0x2506, 0x5257, 0x7716, 0x6206, 0x278a, 0xfccd, 0x0740, 0x3771, 0x078d, 0xfabc, 0x100b, 0x0bb0, 0x0bf5, 0x4eb0, 0x5c3e, 0xf01d,
    0x1be4, 0x5f1a, 0xe724, 0x5557, 0x0027, 0x2727, 0x5160, 0x733c, 0x0c00, 0xcc74, 0xbf34, 0xcf48, 0xb015, 0x1100, 0x11b0, 0xa100,
    0x15a5, 0xf039, 0x3fc0, 0x3e64, 0x8bcb, 0x7556, 0x0050, 0x5050, 0x5207, 0x2746, 0x3001, 0x00cc, 0xcccc, 0x078c, 0xfbbd, 0x0001,
];
