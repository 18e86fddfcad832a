// Generated offline from high-precision references. Do not edit by hand.

use crate::fix192::Fix192;

/// pi at working scale, rounded to nearest.
pub(crate) const PI: Fix192 = Fix192::from_words(0x0000000000029942, 0x1439a0abd72cb0b3, 0x621e9b021d61351b);

/// pi/2 at working scale, rounded to nearest.
pub(crate) const HALF_PI: Fix192 = Fix192::from_words(0x0000000000014ca1, 0x0a1cd055eb965859, 0xb10f4d810eb09a8d);

/// 2*pi at working scale, rounded up; TWO_PI_RESIDUAL holds the next
/// 64 bits of the rounding gap so angle reduction can compensate.
pub(crate) const TWO_PI: Fix192 = Fix192::from_words(0x0000000000053284, 0x28734157ae596166, 0xc43d36043ac26a36);
pub(crate) const TWO_PI_RESIDUAL: u64 = 0xbc2e676c31fd084e;

/// ln(2) at working scale, rounded to nearest.
pub(crate) const LN_2: Fix192 = Fix192::from_words(0x00000000000092c7, 0x957dcc1d0e60ef10, 0x1f17e2103111cbb3);

/// floor(ANGLE_J * 5^24 * 2*pi): 64-bit divisor used to count whole
/// 2*pi cycles without a full-width division.
pub(crate) const ANGLE_M: u64 = 0xfeab4bbe0f81c85f;
pub(crate) const ANGLE_J: u64 = 49;

/// Smallest integer n with round(e^n * scale) nonzero; e^(EXP_INT_MIN + i)
/// lives at EXP_INT_POWERS[i], up through the largest representable power.
pub(crate) const EXP_INT_MIN: i64 = -100;
pub(crate) const EXP_INT_POWERS: [Fix192; 134] = [
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000001), // e^-100
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000002), // e^-99
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000005), // e^-98
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000000000000000e), // e^-97
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000025), // e^-96
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000066), // e^-95
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000115), // e^-94
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00000000000002f1), // e^-93
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00000000000007fe), // e^-92
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00000000000015b9), // e^-91
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000003b0b), // e^-90
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000000000000a080), // e^-89
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000000000001b448), // e^-88
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000000000004a1ef), // e^-87
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00000000000c97b3), // e^-86
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000223aeb), // e^-85
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00000000005d0c15), // e^-84
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000fcedb3), // e^-83
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000002af87ef), // e^-82
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00000000074ce72a), // e^-81
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000013d8347c), // e^-80
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000035f16dd3), // e^-79
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000092a1eb7f), // e^-78
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000000018e96a545), // e^-77
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000000043b79cbcc), // e^-76
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000b813146c5), // e^-75
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000001f45dcfbbe), // e^-74
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00000055023147ce), // e^-73
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000000e713c5bdac), // e^-72
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00000274220facef), // e^-71
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000006ab71522ed4), // e^-70
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000012214f738679), // e^-69
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000314863bcfb55), // e^-68
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000085f6e7109771), // e^-67
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00016c2735e5d10b), // e^-66
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0003dddef58dde32), // e^-65
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000a82bf884a8c24), // e^-64
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x001c92363cc387a6), // e^-63
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x004daa16d5e4e064), // e^-62
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00d31d1f2d78d766), // e^-61
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x023ddddf5a549c96), // e^-60
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0617ee6fcfa421cf), // e^-59
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x1090554a07e54a3e), // e^-58
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x2d066baafcbaa643), // e^-57
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x7a640f42325c574a), // e^-56
    Fix192::from_words(0x0000000000000000, 0x0000000000000001, 0x4cb15e46e574108c), // e^-55
    Fix192::from_words(0x0000000000000000, 0x0000000000000003, 0x885a589a84841dd2), // e^-54
    Fix192::from_words(0x0000000000000000, 0x0000000000000009, 0x9a493d7410f67966), // e^-53
    Fix192::from_words(0x0000000000000000, 0x000000000000001a, 0x1a507db88f9c3442), // e^-52
    Fix192::from_words(0x0000000000000000, 0x0000000000000046, 0xf469f26e420ce3bd), // e^-51
    Fix192::from_words(0x0000000000000000, 0x00000000000000c0, 0xdfff00ecfff9e12a), // e^-50
    Fix192::from_words(0x0000000000000000, 0x000000000000020c, 0x49df7bc155947f60), // e^-49
    Fix192::from_words(0x0000000000000000, 0x0000000000000591, 0x2a0153962781a4c0), // e^-48
    Fix192::from_words(0x0000000000000000, 0x0000000000000f21, 0xff6497f90522eea6), // e^-47
    Fix192::from_words(0x0000000000000000, 0x0000000000002922, 0x9e0b2507900edee4), // e^-46
    Fix192::from_words(0x0000000000000000, 0x0000000000006fd1, 0x2f90f2e7dfc8b4f7), // e^-45
    Fix192::from_words(0x0000000000000000, 0x0000000000012ff3, 0x52898ca86b820b71), // e^-44
    Fix192::from_words(0x0000000000000000, 0x0000000000033a39, 0x1a8ff4f7bb2be59a), // e^-43
    Fix192::from_words(0x0000000000000000, 0x000000000008c5e8, 0x39f74636ca92ec2b), // e^-42
    Fix192::from_words(0x0000000000000000, 0x000000000017d902, 0x30784200bf5ab257), // e^-41
    Fix192::from_words(0x0000000000000000, 0x000000000040d322, 0x415aca21adc6a8f2), // e^-40
    Fix192::from_words(0x0000000000000000, 0x0000000000b03640, 0x2c4ac33680b31049), // e^-39
    Fix192::from_words(0x0000000000000000, 0x0000000001defe5f, 0xeba498c12a5a4af5), // e^-38
    Fix192::from_words(0x0000000000000000, 0x0000000005160a2c, 0x41e7a1868664192c), // e^-37
    Fix192::from_words(0x0000000000000000, 0x000000000dd34f9b, 0x063c419fb5f6500f), // e^-36
    Fix192::from_words(0x0000000000000000, 0x000000002594d83c, 0x03c34f446af9b65d), // e^-35
    Fix192::from_words(0x0000000000000000, 0x0000000066282acf, 0x8ac15c9c4733c8a3), // e^-34
    Fix192::from_words(0x0000000000000000, 0x0000000115b0f601, 0x1a783fe9a9f7bb30), // e^-33
    Fix192::from_words(0x0000000000000000, 0x00000002f2d7d4ad, 0x181be672e1a5af62), // e^-32
    Fix192::from_words(0x0000000000000000, 0x0000000803e0520c, 0xb323c592da27c2b8), // e^-31
    Fix192::from_words(0x0000000000000000, 0x00000015c993f338, 0x66d8d43e6ea4cfaf), // e^-30
    Fix192::from_words(0x0000000000000000, 0x0000003b396dc181, 0xb139fc269e46a3fa), // e^-29
    Fix192::from_words(0x0000000000000000, 0x000000a0fd0945c6, 0x05327146c87b13d3), // e^-28
    Fix192::from_words(0x0000000000000000, 0x000001b59ca5bf9b, 0x1552ce26b31dbf23), // e^-27
    Fix192::from_words(0x0000000000000000, 0x000004a58d6fc7df, 0x5320d778e8f999dc), // e^-26
    Fix192::from_words(0x0000000000000000, 0x00000ca189f5f284, 0x0545b116bf5a4476), // e^-25
    Fix192::from_words(0x0000000000000000, 0x00002255ab88efe6, 0xfa3e849ebe7d0766), // e^-24
    Fix192::from_words(0x0000000000000000, 0x00005d54cce6d95a, 0xe72d94fa5305095c), // e^-23
    Fix192::from_words(0x0000000000000000, 0x0000fdb35d7a90ec, 0x7b13ddddfb941921), // e^-22
    Fix192::from_words(0x0000000000000000, 0x0002b1a13e145116, 0xac3c3d2fa954a0a8), // e^-21
    Fix192::from_words(0x0000000000000000, 0x0007529bb97e329d, 0xd3f5936c2278c100), // e^-20
    Fix192::from_words(0x0000000000000000, 0x0013e7b6b36881f3, 0x8a3e4a749c6b97ca), // e^-19
    Fix192::from_words(0x0000000000000000, 0x00361b95fc9eb7b4, 0x6fa6a66f25485475), // e^-18
    Fix192::from_words(0x0000000000000000, 0x00931483a3344d92, 0x98b4e5c441cc54c5), // e^-17
    Fix192::from_words(0x0000000000000000, 0x018fce2529e0c1ea, 0x8386c5278f4e6ae0), // e^-16
    Fix192::from_words(0x0000000000000000, 0x043ec88a2d7aa0fc, 0x5f1947c5c40e2a51), // e^-15
    Fix192::from_words(0x0000000000000000, 0x0b8a2ef6e2b4280c, 0x1061548ebf693552), // e^-14
    Fix192::from_words(0x0000000000000000, 0x1f5e4d9eb2799f75, 0xc907eeb927b8a9e4), // e^-13
    Fix192::from_words(0x0000000000000000, 0x5544a094f8b1df5e, 0xaeabbfb1c359512d), // e^-12
    Fix192::from_words(0x0000000000000000, 0xe7c85c611b7412b0, 0xa2b14407bc30828a), // e^-11
    Fix192::from_words(0x0000000000000002, 0x760cf3947098134f, 0x976d9053a3d5a54d), // e^-10
    Fix192::from_words(0x0000000000000006, 0xb0a7b2f6b315b639, 0xa2fe29e72961c2a2), // e^-9
    Fix192::from_words(0x0000000000000012, 0x2f7aaab85c42f665, 0x639dbf46d41b3da5), // e^-8
    Fix192::from_words(0x0000000000000031, 0x6ee7885069eda983, 0x22d66d875d46aa77), // e^-7
    Fix192::from_words(0x0000000000000086, 0x5f98c3afa8999e05, 0x2adcbef9ee60e04f), // e^-6
    Fix192::from_words(0x000000000000016d, 0x43cc787eba86d63c, 0x0c65759ed9fc156f), // e^-5
    Fix192::from_words(0x00000000000003e0, 0xe48cd0e3d31cbc56, 0x057229c36a4bc3c1), // e^-4
    Fix192::from_words(0x0000000000000a8a, 0xf65ed160f96b9f0e, 0x6a680adde93822a3), // e^-3
    Fix192::from_words(0x0000000000001ca8, 0x8a57faa3491e9eef, 0x7eb68448eeb8b40a), // e^-2
    Fix192::from_words(0x0000000000004de6, 0xc8d2cc9cc85c1c83, 0xc5294d2f10b51cac), // e^-1
    Fix192::from_words(0x000000000000d3c2, 0x1bcecceda1000000, 0x0000000000000000), // e^0
    Fix192::from_words(0x0000000000023f9e, 0x5a6acd2121ba821f, 0x78aa916e4f75eb3d), // e^1
    Fix192::from_words(0x0000000000061cb1, 0x88a4185e463146db, 0x75e83e63e99d2273), // e^2
    Fix192::from_words(0x0000000000109d47, 0x236d0fb4dd382a11, 0xa792aadeed53ddfd), // e^3
    Fix192::from_words(0x00000000002d299b, 0xa4dbf41c98f1f435, 0x33eeb0c660b8bdcf), // e^4
    Fix192::from_words(0x00000000007ac3b5, 0x79e9b80ecc6a84bc, 0x0a61a25ac2d9337b), // e^5
    Fix192::from_words(0x00000000014db55e, 0xb7a79f61eab2746c, 0x8b1b7e89efe21ab3), // e^6
    Fix192::from_words(0x00000000038b1d1a, 0xa3aefb51836b532e, 0x49c253819db27a20), // e^7
    Fix192::from_words(0x0000000009a1ca68, 0x482cc122cfda84a3, 0x73f0831a82bcf578), // e^8
    Fix192::from_words(0x000000001a2eb6c3, 0xe7cd8dea34fab691, 0x6ec95b68be0d8989), // e^9
    Fix192::from_words(0x00000000472bdd8f, 0x58692b62ba7f4f65, 0x48c43d218f8222e1), // e^10
    Fix192::from_words(0x00000000c176baae, 0x2a86f9e78c2c6d20, 0x41fdf9d2c2ecb749), // e^11
    Fix192::from_words(0x000000020de39ba9, 0xf2099ed11b6dfba2, 0x7c9dd2644ac5a4ec), // e^12
    Fix192::from_words(0x000000059583c7d5, 0xa33c1a05540be88d, 0x1699a290cb0e071d), // e^13
    Fix192::from_words(0x0000000f2dd2f2cc, 0x975f1c7ab63f67cf, 0xdc04e06f3234c75f), // e^14
    Fix192::from_words(0x0000002942c3cae8, 0x5b1b9626372469cb, 0xb8a8220b3ea7ad13), // e^15
    Fix192::from_words(0x00000070289257f4, 0x0bee5a740c060f6d, 0x734a30b168b31785), // e^16
    Fix192::from_words(0x00000130e0dc9d69, 0x8d837f9332d23961, 0xd2e9ca7f08daf506), // e^17
    Fix192::from_words(0x0000033cbecd7dc1, 0x3ee1a53873fb73b4, 0x0897fdfe6683e3b1), // e^18
    Fix192::from_words(0x000008ccc36b0a64, 0xf6a3dfa601f45f32, 0xb431b786f1ace8c7), // e^19
    Fix192::from_words(0x000017eba54b874a, 0x71f57803b662c2e4, 0x8f05f4dd3c2e8186), // e^20
    Fix192::from_words(0x00004105cb77182a, 0x60c14a8d78c8ee16, 0xc8fbc0be3a5af2ce), // e^21
    Fix192::from_words(0x0000b0bff6240329, 0x38fa14cee9580234, 0xb070e5fe6018f9bf), // e^22
    Fix192::from_words(0x0001e074b623e084, 0x8962be2f697461bf, 0x471407c03371ee9a), // e^23
    Fix192::from_words(0x00051a03b9cd5b1b, 0x3f1528101ce63d6a, 0x574344f3402daa47), // e^24
    Fix192::from_words(0x000dde1d99e4b7cb, 0x15a649ab7b608b4d, 0xea4c16ea4211b85f), // e^25
    Fix192::from_words(0x0025b236fd6e1c99, 0x0b900cedfe60696e, 0xcac2e0bed5a863c9), // e^26
    Fix192::from_words(0x00667800e840c1a5, 0x5c9597502fc30461, 0xa8c4fd0718bc18f6), // e^27
    Fix192::from_words(0x011689fa82bdc416, 0x17345495bc475958, 0xe6ed8e8c32dda3d0), // e^28
    Fix192::from_words(0x02f525beeafe55d2, 0x564761421abd9e05, 0xcc0469aaf082374a), // e^29
    Fix192::from_words(0x080a23e03129c3c2, 0x34f3d75148620832, 0x06454dff6c0f8b6d), // e^30
    Fix192::from_words(0x15da9add7b1c2d99, 0x6986b51318240702, 0xc3c30eb43cbf80ad), // e^31
    Fix192::from_words(0x3b67b683fa6e26c8, 0x5a35da443ecaccdb, 0xf4c933fd08804c70), // e^32
    Fix192::from_words(0xa17ad98a6590b81b, 0xa1eddb3ce254c5f1, 0x39d4faad534a4f25), // e^33
];

/// Left edges of the geometric segments partitioning the reduced band
/// [2^143, 2^144); LN_COEFFS[i] approximates ln on segment i.
pub(crate) const LN_BOUNDS: [Fix192; 16] = [
    Fix192::from_words(0x0000000000008000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0x00000000000085aa, 0xc367cc487b14c5c9, 0x5b8c2154c1b2148a),
    Fix192::from_words(0x0000000000008b95, 0xc1e3ea8bd6e6fbe4, 0x628758a53c901aa8),
    Fix192::from_words(0x00000000000091c3, 0xd373ab11c3360fd6, 0xd8e0ae5ac9d81943),
    Fix192::from_words(0x0000000000009837, 0xf0518db8a96f46ad, 0x23182e42f6f65e14),
    Fix192::from_words(0x0000000000009ef5, 0x326091a111ada091, 0x1f09ebb9fdd165c1),
    Fix192::from_words(0x000000000000a5fe, 0xd6a9b15138ea1cbd, 0x7f621710701b1dd1),
    Fix192::from_words(0x000000000000ad58, 0x3eea42a14ac64980, 0xa8c8f59a2ec46be4),
    Fix192::from_words(0x000000000000b504, 0xf333f9de6484597d, 0x89b3754abe9f1d6f),
    Fix192::from_words(0x000000000000bd08, 0xa39f580c36bea881, 0x1fb66d0faf7a15b3),
    Fix192::from_words(0x000000000000c567, 0x2a115506dadd3e2a, 0xd0c964dd9f376b10),
    Fix192::from_words(0x000000000000ce24, 0x8c151f8480e3e235, 0x838f95f2c6ed6f28),
    Fix192::from_words(0x000000000000d744, 0xfccad69d6af439a6, 0x8bb9902d3fde1d73),
    Fix192::from_words(0x000000000000e0cc, 0xdeec2a94e1110658, 0x95048dd333ca224b),
    Fix192::from_words(0x000000000000eac0, 0xc6e7dd24392ed02d, 0x75b3706e54fac4fb),
    Fix192::from_words(0x000000000000f525, 0x7d152486cc2c7b9d, 0x0c7aed980fc36f51),
];

/// Per-segment polynomial coefficients for ln, low degree first.
pub(crate) const LN_COEFFS: [[Fix192; 23]; 16] = [
    [
        Fix192::from_words(0xfffffffffffc8c79, 0x62de5c30e80769c8, 0xa51ef6f05b249024),
        Fix192::from_words(0x00000000001d7439, 0x73fa83480d2cd777, 0xce82456eefc51b30),
        Fix192::from_words(0xffffffffff05b881, 0x60b985e2bffe65a5, 0x31d2105204ac4b66),
        Fix192::from_words(0x00000000070860b7, 0xfe39a4255a4b9287, 0xd6af96dbcd888810),
        Fix192::from_words(0xffffffffd772fc40, 0xf10243ae75b73c63, 0x77880c0ea32eb8db),
        Fix192::from_words(0x00000000bd05c579, 0xaee0108716581835, 0x10ae2d95ed331eb4),
        Fix192::from_words(0xfffffffd2da4da7a, 0x2e82358276e59b08, 0x1cb0d23169e372fe),
        Fix192::from_words(0x00000008f2978e02, 0x79bc0cfb9fbf9c30, 0x474b6f0d50d696ae),
        Fix192::from_words(0xffffffe83d8d85ca, 0x5c4a452b47b4440c, 0xbfdc44964ec73596),
        Fix192::from_words(0x000000352c55c3b4, 0x35dbb1049cb05cd2, 0x5eec0c5f34c7071d),
        Fix192::from_words(0xffffff9b4e8f9482, 0xf60673e203c09fdc, 0x7ae6641ad5667a96),
        Fix192::from_words(0x000000a1a0cd694d, 0xfb8878b2a5053309, 0xccc9852a6391359e),
        Fix192::from_words(0xffffff242ede5cc2, 0x6ba0e7cc27511218, 0xc9f00b1128b9bf28),
        Fix192::from_words(0x000000fca017514d, 0x87abcf5bbda119bd, 0xbf31f5f19cfd98bf),
        Fix192::from_words(0xffffff0bec1f538e, 0xfbf1aef7d858d27d, 0x1368e42e9b3bd3c5),
        Fix192::from_words(0x000000c4a5569c54, 0xcad353a558595f98, 0xbb8d9010e504010c),
        Fix192::from_words(0xffffff7d74da2e4a, 0x9063cc03b2879891, 0x58e7acf9cb18eb64),
        Fix192::from_words(0x000000462f9945d4, 0xe4998826789f2f25, 0x95b5a0ec1ae01620),
        Fix192::from_words(0xffffffe232b0c340, 0x2f845065e31dac84, 0xafb5852a071158c2),
        Fix192::from_words(0x000000099ed0aaa9, 0xbeca75118bbb72de, 0xcbd791f8666eb3b0),
        Fix192::from_words(0xfffffffdc7f96e98, 0xd5bc13fad0abce05, 0xda3ea4156786b281),
        Fix192::from_words(0x000000005363ad00, 0xb870613e9965c25b, 0x407a5a8c1384d1d7),
        Fix192::from_words(0xfffffffffa24d8f6, 0x4cce14de395037ff, 0x468df78f98651a14),
    ],
    [
        Fix192::from_words(0xfffffffffffc95a5, 0xdc3638f2b8ed78b9, 0xa71075115e35acdf),
        Fix192::from_words(0x00000000001c348b, 0x2c7b4d0b2bcaafd4, 0x81a0c9378a16205b),
        Fix192::from_words(0xffffffffff1a7e2e, 0x2d7779f12d85e9ba, 0xfb9bfbfeac9706cf),
        Fix192::from_words(0x00000000062cf56d, 0xd1d53488c512fd53, 0x87ddafff3e238bb8),
        Fix192::from_words(0xffffffffdde6a45a, 0x9ab5135fcfd2892c, 0xe669889c198f0a11),
        Fix192::from_words(0x000000009835a126, 0x70922c7b9d321eb5, 0x5f391aacbe0d82e4),
        Fix192::from_words(0xfffffffdd2fcc2c0, 0x10d1dc252aa99293, 0xe42d934f0a19ee50),
        Fix192::from_words(0x000000069b67309c, 0x8351cc43eefacf67, 0xae889f12d7fa8118),
        Fix192::from_words(0xffffffef330f7368, 0x92d5649a210f3797, 0xb896fd993d98b89b),
        Fix192::from_words(0x00000024014a4421, 0x3111084e4aa59dca, 0xdbe2649956ffddd7),
        Fix192::from_words(0xffffffbeb5660e1a, 0xe6cf856be91f9cd2, 0xa4f2e2ef02218052),
        Fix192::from_words(0x000000645c0d79f4, 0x463e4f99d4032e30, 0xab237fbfe032a5f8),
        Fix192::from_words(0xffffff7d4bcbbec2, 0xf83ef3ec1a3f3590, 0xe84a0e900fafff99),
        Fix192::from_words(0x0000008fd7ebd0e7, 0xcad9ed1ed064a577, 0xe787105c6aae2372),
        Fix192::from_words(0xffffff7aea6c9450, 0xa34bb3f1409f8743, 0xc40398269a8019cb),
        Fix192::from_words(0x00000066ad11e468, 0x480a07bc05b2e3b8, 0xed41a69f66127374),
        Fix192::from_words(0xffffffbeba6d1725, 0x4831e601d943cc48, 0xac73d67ce45b80c7),
        Fix192::from_words(0x000000219aea6e02, 0xcc6f0cdff5497177, 0x6b9efb73158dba71),
        Fix192::from_words(0xfffffff255f237a0, 0xe8d0bcd25ee1f5d4, 0xb7ba4fbb4ed759b1),
        Fix192::from_words(0x000000043954c21a, 0xbe1c1cc7e55fd063, 0xf6c63b0ea8f1aba9),
        Fix192::from_words(0xffffffff112cb49d, 0x99cb556b5afb2fc4, 0xaf0c569884607540),
        Fix192::from_words(0x0000000021930e6e, 0x264917a77f7548c3, 0xd7406852123d0b91),
        Fix192::from_words(0xfffffffffdbdff69, 0x3d2630e9bf856c10, 0xcb2c626c07b15d16),
    ],
    [
        Fix192::from_words(0xfffffffffffc9ed2, 0x558e15b489d387aa, 0xa901f3326146c999),
        Fix192::from_words(0x00000000001b026a, 0x91abb8ee40224228, 0x9d93a19db6b94483),
        Fix192::from_words(0xffffffffff2d8a82, 0x85eaa05baf7cf92c, 0x2a87082bc5ff675b),
        Fix192::from_words(0x00000000056c47f4, 0x5a6c38c1b24bfe2c, 0x7401b3294213b79d),
        Fix192::from_words(0xffffffffe353839f, 0xc52fe0be70093482, 0x0b992bdb0a8c47fa),
        Fix192::from_words(0x000000007a90e281, 0x7b41f8ddf445b595, 0x7e9405986b5e30c4),
        Fix192::from_words(0xfffffffe527c0a07, 0xe9f3b6bbe9b42efb, 0xcce1f212e2f22ea5),
        Fix192::from_words(0x00000004e0f4432c, 0x909e826eb70df8a7, 0xcbed70af55d526cc),
        Fix192::from_words(0xfffffff41ec6c2e5, 0x2e252295a3da2206, 0x5fee224b270ed59a),
        Fix192::from_words(0x0000001861487ad4, 0x62f82a38f20f3b95, 0xc53877346a1ebc47),
        Fix192::from_words(0xffffffd5a9ec02b5, 0x2c53009ca4d3d968, 0x6dc0c2f57cbf49ea),
        Fix192::from_words(0x0000003e50f02a00, 0xb84994d0bd06988d, 0x318ea994dfc0e3e9),
        Fix192::from_words(0xffffffb248718f75, 0x620e0b81ef5f3b93, 0x3bff8f2015cc8d78),
        Fix192::from_words(0x00000051e754d9e8, 0xe5c862ac96f9800e, 0xb8ece32dc301c00b),
        Fix192::from_words(0xffffffb76f6e99f9, 0xe74644c943fd36f9, 0x9271fd7b7d84fdb6),
        Fix192::from_words(0x000000359c679902, 0x0cd7ae0a3a90a160, 0x4404492cead3f9b1),
        Fix192::from_words(0xffffffdf5d368b92, 0xa418f300eca1e624, 0x5639eb3e70f478b5),
        Fix192::from_words(0x000000101717154a, 0xc63d8971ea5d98d9, 0xacf98c269a425a94),
        Fix192::from_words(0xfffffff9bc229f4d, 0xf22b991136ea177c, 0xfd3f796b7b196245),
        Fix192::from_words(0x00000001dac5c37f, 0x90fd7e4ebec6c86c, 0xe0ff9c96f5ee50b1),
        Fix192::from_words(0xffffffff9b9617dd, 0x8e70650f45a43dfb, 0x196d6a4fe8f59820),
        Fix192::from_words(0x000000000d849054, 0xedb16761b56192a5, 0xda338ffad633f188),
        Fix192::from_words(0xffffffffff21264f, 0x62159f2d53dd9804, 0x08a2be5fae9f8f91),
    ],
    [
        Fix192::from_words(0xfffffffffffca7fe, 0xcee5f2765ab9969b, 0xaaf371536457e655),
        Fix192::from_words(0x000000000019dd44, 0x89397c3c55155625, 0x9ad468a3160c59ce),
        Fix192::from_words(0xffffffffff3f021f, 0xaad008b1873aa5d0, 0xe6465c9cc9d81b2b),
        Fix192::from_words(0x0000000004c315f8, 0x0cf5e6c02303dac8, 0x00656ddb59fe5df4),
        Fix192::from_words(0xffffffffe7e36969, 0xa278e6e8dd26cb11, 0xe88cef2a5b9e40b6),
        Fix192::from_words(0x0000000062b215b5, 0x643ccb68cf00e641, 0x8f1bb67b408605cb),
        Fix192::from_words(0xfffffffeb4cc5d0b, 0x6571529cefcba864, 0x60eb23fd8231c6c6),
        Fix192::from_words(0x000000039a3e7b7e, 0xec3431a2b9735210, 0xdd4e1145d9943216),
        Fix192::from_words(0xfffffff79987b9b4, 0x496ab24d10879bcb, 0xdc4b7ecc9ecfa61d),
        Fix192::from_words(0x00000010822569ca, 0x92546d32c2dce342, 0x17e9e5ec82634172),
        Fix192::from_words(0xffffffe48c6035e4, 0x99723e678780261d, 0x395168b9abc5169d),
        Fix192::from_words(0x00000026b1a3f315, 0x59bee90048ed0f73, 0x1b9efa1810d2b765),
        Fix192::from_words(0xffffffd1ca0808bb, 0xe0b405987fd7aff3, 0x2e3e7d449f6fa1ac),
        Fix192::from_words(0x0000002ea2adebbb, 0x7c7adf3cd6741cb0, 0xe2dc3d540a7f6cf4),
        Fix192::from_words(0xffffffd86f0df362, 0x046662ac91ea9799, 0xabdfdbe9c437874b),
        Fix192::from_words(0x0000001bfe049b29, 0x4b1405d06c82f650, 0xb0d7957f8e1708e1),
        Fix192::from_words(0xffffffefae9b45c9, 0x520c79807650f312, 0x2b1cf59f3923a6b6),
        Fix192::from_words(0x00000007b43a2528, 0x8cc4fbd17e6b0613, 0x3585608c74596edb),
        Fix192::from_words(0xfffffffd209ff0b5, 0x6d663ab171a5cb2d, 0x843a70920a4b67a0),
        Fix192::from_words(0x00000000d0747f0a, 0x72ab5fd531150ef5, 0x2c422c0de75596ba),
        Fix192::from_words(0xffffffffd5c7ff60, 0xcc9c7067f2fe0cd6, 0xc4bbff03f931b479),
        Fix192::from_words(0x0000000005714d17, 0x1fd741dd598223f2, 0x19d953aad4ccac87),
        Fix192::from_words(0xffffffffffaa1456, 0x70ced3a75be42729, 0xe8d19004d40a02a6),
    ],
    [
        Fix192::from_words(0xfffffffffffcb12b, 0x483dcf382b9fa58c, 0xace4ef7467690310),
        Fix192::from_words(0x000000000018c48c, 0x356927911b8369e4, 0xa29b7f3a5080e067),
        Fix192::from_words(0xffffffffff4f069c, 0x96baf62f5a4a4945, 0x8e663405fb563235),
        Fix192::from_words(0x00000000042e82d4, 0x1eb1a0585d742539, 0xdf01938a4f18b9cd),
        Fix192::from_words(0xffffffffebb97e20, 0x788121d73adb9e31, 0xbbc4060751971d9e),
        Fix192::from_words(0x000000004f796484, 0x8ccca512782eace8, 0x9388669c8433700c),
        Fix192::from_words(0xffffffff009bcb66, 0x4f7b0e1817ed9189, 0xf7984cfc9501e53c),
        Fix192::from_words(0x00000002a8ff4094, 0x62fbe91a12a0fda5, 0x7c9c5031b94dd37a),
        Fix192::from_words(0xfffffffa0f636172, 0x9712914ad1ed1103, 0x2ff71125938cffd7),
        Fix192::from_words(0x0000000b2da413fa, 0x944b6ea103cd2990, 0x7803968687986da8),
        Fix192::from_words(0xffffffee33264557, 0xe4a0630fd3d41630, 0x96e34fd10a63232d),
        Fix192::from_words(0x0000001806b2cf39, 0x76be4be1478992fc, 0x41a8f624ac907664),
        Fix192::from_words(0xffffffe485dbcb98, 0x4d741cf984ea2243, 0x193e01622417d9a5),
        Fix192::from_words(0x0000001a8dd0f227, 0x58a460a243851cd0, 0x4a805956fd791b2f),
        Fix192::from_words(0xffffffea6d273ec4, 0x9e31b29378a9d60e, 0xd9659f39d9ac9a47),
        Fix192::from_words(0x0000000e9da47182, 0x89d0b660d51c3aa5, 0xea1a7d7d984bedcc),
        Fix192::from_words(0xfffffff7d74da2e4, 0xa9063cc03b287989, 0x158e7acf9c4c7400),
        Fix192::from_words(0x00000003b04e3acd, 0x39f2af92e6a9c942, 0xae8acd0beb14346c),
        Fix192::from_words(0xfffffffeaed4374e, 0x03a904d64df25155, 0x7f746cb4a31b98bc),
        Fix192::from_words(0x000000005b8660c1, 0xda72ec7952ab534d, 0xfff5e3e96b0bf09d),
        Fix192::from_words(0xffffffffee3fcb74, 0xc6ade09fd6855e70, 0x2ed1f520ab3b229f),
        Fix192::from_words(0x000000000230f978, 0xedff9989e0b72a04, 0xb563bd3f3e9ee370),
        Fix192::from_words(0xffffffffffdedf83, 0x4a8dc5650b86d63e, 0x63a0403ddb05d838),
    ],
    [
        Fix192::from_words(0xfffffffffffcba57, 0xc195abf9fc85b47d, 0xaed66d956a7a1fcb),
        Fix192::from_words(0x000000000017b7ba, 0xb1657953ab140e91, 0xbe55766ce329b197),
        Fix192::from_words(0xffffffffff5db6c6, 0x960b24cb1d691fb6, 0xb2039b4e5506012d),
        Fix192::from_words(0x0000000003ac0b2e, 0x0cea800b04d5172d, 0x9d9145962106f0f3),
        Fix192::from_words(0xffffffffeef3522d, 0x4d5a89afe7e94496, 0x7334c44e0cc76f1d),
        Fix192::from_words(0x000000003fff0771, 0xbda70b42dce3ab18, 0xe56cec2feaeab1b4),
        Fix192::from_words(0xffffffff3b10f83c, 0xd637db085e0fc934, 0xd76eacfd85afd04e),
        Fix192::from_words(0x00000001f6db6de9, 0xf896e5f276be47a8, 0xc78f67df5d1e5097),
        Fix192::from_words(0xfffffffbccc3dcda, 0x24b559268843cde5, 0xee25bf664f5b6122),
        Fix192::from_words(0x0000000791b2512f, 0x91fa2bd7c3cba4cf, 0x2b3649666917fbcd),
        Fix192::from_words(0xfffffff4753f7d9f, 0xe183271654606e3d, 0x96297ade70682154),
        Fix192::from_words(0x0000000eeb257f64, 0xe3b82c42b2bb9bbe, 0x8ed2e620dac9947e),
        Fix192::from_words(0xffffffefa97977d8, 0x5f07de7d8347e6b2, 0x1d0941d201b6fa9c),
        Fix192::from_words(0x0000000f1ea34e33, 0x683311efe547005b, 0xe299133002dca2bc),
        Fix192::from_words(0xfffffff43ca58001, 0xe670f9f532e86fc9, 0xe97de9cf206e505d),
        Fix192::from_words(0x00000007a1a6462d, 0x8bab757a69a48874, 0x09ceaeb1f9004d02),
        Fix192::from_words(0xfffffffbeba6d172, 0x54831e601d943cc4, 0x8ac73d67ce30bcde),
        Fix192::from_words(0x00000001c422937c, 0x8bfdf24b23bbfaa2, 0x357e0cfc389090e2),
        Fix192::from_words(0xffffffff656809de, 0xc56e7cd7a1cfad5e, 0xd22a0b70f6f1a5e8),
        Fix192::from_words(0x00000000282f69b8, 0xd8509b554995e1e5, 0x982d38ba09343e52),
        Fix192::from_words(0xfffffffff88965a4, 0xecce5aab5ad7d97e, 0x257862b4c422d3af),
        Fix192::from_words(0x0000000000e1dc6a, 0xad9e679147b60371, 0xd9655485b090aa5e),
        Fix192::from_words(0xfffffffffff33a53, 0x424fbc9bf2ee4f00, 0x67d8050c8a96df05),
    ],
    [
        Fix192::from_words(0xfffffffffffcc384, 0x3aed88bbcd6bc36e, 0xb0c7ebb66d8b3c86),
        Fix192::from_words(0x000000000016b64e, 0xd06d5e0a0c95a7b1, 0x92af6cd47797ad87),
        Fix192::from_words(0xffffffffff6b2edc, 0x82780d0e273540f7, 0x73df2ab66b57c54a),
        Fix192::from_words(0x0000000003397a13, 0xc8e81515694f5bf6, 0x8b663dde412d1ae9),
        Fix192::from_words(0xfffffffff1a9c1cf, 0xe297f05f38049a41, 0x05cc95ed8546183a),
        Fix192::from_words(0x0000000033885adf, 0x5279e8386408c36a, 0xaa10a9fab763dfea),
        Fix192::from_words(0xffffffff6824b27e, 0x24c4ffaa3a29c170, 0x2e8daf2b92f9f0ab),
        Fix192::from_words(0x000000017350f867, 0xe20fd5af0ad47b40, 0x0babdf56e9eb3e62),
        Fix192::from_words(0xfffffffd07b1b0b9, 0x4b8948a568f68881, 0x97fb8892c9bed5c0),
        Fix192::from_words(0x000000052011725f, 0x62fcc883a10fc982, 0xa0ceeea3424a630a),
        Fix192::from_words(0xfffffff884149353, 0x2c504b6bbd18f05b, 0x96a92fa478bbba45),
        Fix192::from_words(0x00000009436b1f11, 0x2d9e3c5be88238b3, 0xd1c8691b1863e089),
        Fix192::from_words(0xfffffff6490e31ee, 0xac41c1703debe772, 0x677ff1e402a1a821),
        Fix192::from_words(0x000000089beb52c5, 0x268171a5c3d651d4, 0x6d2ef4bced80e228),
        Fix192::from_words(0xfffffff9960c4014, 0x4e7ebcd7a15012d9, 0x87f7b1b972c4932e),
        Fix192::from_words(0x00000003fc128e1a, 0x0c236394dadc0692, 0x43396bdd08e6c816),
        Fix192::from_words(0xfffffffdf5d368b9, 0x2a418f300eca1e62, 0x45639eb3e70895c9),
        Fix192::from_words(0x00000000d87ba687, 0xde2b8ecc9eef19db, 0x82972d8ac245efc2),
        Fix192::from_words(0xffffffffb91e5777, 0xbd419b2877ea1bbe, 0x05a6b2a752c924cf),
        Fix192::from_words(0x0000000011a4d2a4, 0x1652e81cc1e3dc97, 0x5acaabf617b90383),
        Fix192::from_words(0xfffffffffcdcb0be, 0xec7383287a2d21ef, 0xd8cb6b527f479fe1),
        Fix192::from_words(0x00000000005aefce, 0x36f18df45007c7f6, 0x4636f84a48a42b92),
        Fix192::from_words(0xfffffffffffb135e, 0x381daa53bc43355b, 0x7ed7af75136f4f1f),
    ],
    [
        Fix192::from_words(0xfffffffffffcccb0, 0xb445657d9e51d25f, 0xb2b969d7709c5941),
        Fix192::from_words(0x000000000015bfcc, 0xdfc178a3552c3fb8, 0xade661397d222a8e),
        Fix192::from_words(0xffffffffff7788c5, 0x1418de4104bd4be4, 0xaffe8d0eb1e309f9),
        Fix192::from_words(0x0000000002d4df6d, 0x68f22bf18f088bc9, 0xdf317c80c8567362),
        Fix192::from_words(0xfffffffff3f1b4b4, 0xd13c73746e936588, 0xf44677952dcefb9f),
        Fix192::from_words(0x00000000297f147f, 0x4dff76b06a70aefd, 0x9bbb681bee257ff0),
        Fix192::from_words(0xffffffff8ae70b2a, 0xa0550eb5b33db59e, 0x112828b2488e5a37),
        Fix192::from_words(0x00000001122f4f40, 0x224ebb4d5ed61f0b, 0x365a5c76e0bc0eab),
        Fix192::from_words(0xfffffffde661ee6d, 0x125aac934421e6f2, 0xf712dfb327a71d1e),
        Fix192::from_words(0x00000003787012be, 0xa5d3a9426b7f0a65, 0x10f8e5b0f5bb3905),
        Fix192::from_words(0xfffffffb25ae08d1, 0xfdc4dba628b9fb17, 0x93b154c3d914048b),
        Fix192::from_words(0x00000005c07b755a, 0xced909c441122f74, 0x6e4cde409c9ce1c5),
        Fix192::from_words(0xfffffffa39410117, 0x7c1680b30ffaf5fe, 0x65c7cfa893b9264b),
        Fix192::from_words(0x00000004e6e62a88, 0x77a96ec54dde5194, 0xdae71a5ff77d4ece),
        Fix192::from_words(0xfffffffc80b82055, 0xbb42ea5a3c9592bc, 0x2b622d9cc752716a),
        Fix192::from_words(0x00000002149e12c5, 0xa14f0edab67af301, 0x2aba9151fabe1027),
        Fix192::from_words(0xfffffffefae9b45c, 0x9520c79807650f31, 0x22b1cf59f385cc20),
        Fix192::from_words(0x0000000067a70502, 0xad4d96b13169f9af, 0x16b3a01c92a83051),
        Fix192::from_words(0xffffffffdf802dd1, 0x28cc4e32ab55f66b, 0x7e67d34c457ce88e),
        Fix192::from_words(0x0000000007bf2b82, 0x51eb0e932b29bdd1, 0xa89d9b34927cb5df),
        Fix192::from_words(0xfffffffffeae3ffb, 0x0664e3833f97f066, 0xb625dff81fc9798a),
        Fix192::from_words(0x0000000000249cf9, 0xb5eddf224904b9cb, 0x68efe5ba058c71c8),
        Fix192::from_words(0xfffffffffffe19f5, 0xbe77c1e28b4737e4, 0xf1566cc95d8fbdd6),
    ],
    [
        Fix192::from_words(0xfffffffffffcd5dd, 0x2d9d423f6f37e150, 0xb4aae7f873ad75fd),
        Fix192::from_words(0x000000000014d3be, 0x6b335ee720385c9d, 0x6a4f16b21a868a5f),
        Fix192::from_words(0xffffffffff82dc40, 0xb05cc2f15fff32d2, 0x98e9082902562542),
        Fix192::from_words(0x00000000027c8798, 0xfd7af3838a0dd0a0, 0x7816e8ceedd95180),
        Fix192::from_words(0xfffffffff5dcbf10, 0x3c4090eb9d6dcf18, 0xdde20303a8cb9bfd),
        Fix192::from_words(0x00000000216a2f12, 0x3e68b46e3802b30c, 0x6da3510ae617acfe),
        Fix192::from_words(0xffffffffa5b49b4f, 0x45d046b04edcb361, 0x03961a462d3b7ae4),
        Fix192::from_words(0x00000000ca762e3b, 0x9c7a99835ab200c6, 0x11463897f07fd018),
        Fix192::from_words(0xfffffffe83d8d85c, 0xa5c4a452b47b4440, 0xcbfdc44964e71c8a),
        Fix192::from_words(0x000000025995fd89, 0x69d0ff6263c788b9, 0x9dcad9d15c791c73),
        Fix192::from_words(0xfffffffcda747ca4, 0x17b0339f101e04fe, 0xe3d73320d69d0f7c),
        Fix192::from_words(0x00000003924e8a58, 0xec6e08fd8d55baee, 0xf754755b47fc0c5f),
        Fix192::from_words(0xfffffffc90bb7973, 0x09ae839f309d4448, 0x6327c02c449060fa),
        Fix192::from_words(0x00000002ca884bf0, 0x66c08457d8645190, 0x40c41b366dd80220),
        Fix192::from_words(0xfffffffe17d83ea7, 0x1df7e35defb0b1a4, 0xfa26d1c85d2a782f),
        Fix192::from_words(0x0000000116196745, 0x80f60c188c29fdee, 0xa88d3a989944c61b),
        Fix192::from_words(0xffffffff7d74da2e, 0x4a9063cc03b28798, 0x9158e7acf9c76e33),
        Fix192::from_words(0x0000000031a102ca, 0x33170b08c82ef318, 0x69592650bb3cb6dd),
        Fix192::from_words(0xfffffffff1195861, 0xa017c22832f18ed6, 0x4257dac295031021),
        Fix192::from_words(0x000000000366bc93, 0xd063f8dae8243ed1, 0x5c4d096af0228c7c),
        Fix192::from_words(0xffffffffff71fe5b, 0xa6356f04feb42af3, 0x81768fa90559dcb0),
        Fix192::from_words(0x00000000000ebdc5, 0x863078784b7e119a, 0xcd9c89b52a451e4b),
        Fix192::from_words(0xffffffffffff449b, 0x1ec999c29bc72a06, 0xffe8d1bef1f30c9c),
    ],
    [
        Fix192::from_words(0xfffffffffffcdf09, 0xa6f51f01401df041, 0xb69c661976be92b8),
        Fix192::from_words(0x000000000013f1b2, 0x0439f9f502e4c360, 0x1a84632c2c4d289d),
        Fix192::from_words(0xffffffffff8d3f17, 0x16bbbcf896c2f4dd, 0x7dcdfdff564b832a),
        Fix192::from_words(0x00000000022ef40c, 0x348320548dad9ef2, 0xe344e80b84335d76),
        Fix192::from_words(0xfffffffff779a916, 0xa6ad44d7f3f4a24b, 0x399a62270663b955),
        Fix192::from_words(0x000000001ae83718, 0x205a05d0c303920f, 0x40a11acca5e077da),
        Fix192::from_words(0xffffffffba5f9858, 0x021a3b84a5553252, 0x7c85b269e142cd49),
        Fix192::from_words(0x000000009580153a, 0xb8dc5b8d65444634, 0x454c2d76721dbc6c),
        Fix192::from_words(0xfffffffef330f736, 0x892d5649a210f379, 0x7b896fd993d74868),
        Fix192::from_words(0x000000019759bbbd, 0xd6d35611d0dcc429, 0xd39b09608a49e477),
        Fix192::from_words(0xfffffffdf5ab3070, 0xd7367c2b5f48fce6, 0x95279717780b8d5a),
        Fix192::from_words(0x0000000237b83279, 0x859d2d45f279df00, 0x5d06a5ad4e95856b),
        Fix192::from_words(0xfffffffdf52f2efb, 0x0be0fbcfb068fcd6, 0x43a1283a40382670),
        Fix192::from_words(0x0000000196d9c706, 0x319d2fecbc71b750, 0x319ca81e830dc3a2),
        Fix192::from_words(0xfffffffef5d4d928, 0xa1469767e2813f0e, 0x878807304d3114ad),
        Fix192::from_words(0x000000009134b3cb, 0xcbf4f1044b1b8c8d, 0x14a002792266966f),
        Fix192::from_words(0xffffffffbeba6d17, 0x254831e601d943cc, 0x48ac73d67ce34241),
        Fix192::from_words(0x0000000017c32e18, 0x50e295d6a201ba3e, 0x1e70381b8709139e),
        Fix192::from_words(0xfffffffff92af91b, 0xd074685e692f70fa, 0xea5bdd27dda74a8e),
        Fix192::from_words(0x00000000017e4eea, 0xeb7832dbb9696ca3, 0x28b6ecc4028def3a),
        Fix192::from_words(0xffffffffffc44b2d, 0x276672d55ad6becb, 0xf12bc315a62116dc),
        Fix192::from_words(0x000000000005ef67, 0xd960a37a39506d3e, 0x2a27b72b90bf4f28),
        Fix192::from_words(0xffffffffffffb7bf, 0xed27a4c61d37f0ad, 0x8219658c4d80f62a),
    ],
    [
        Fix192::from_words(0xfffffffffffce836, 0x204cfbc31103ff32, 0xb88de43a79cfaf73),
        Fix192::from_words(0x000000000013193b, 0x0b6fb0c0b7d3e261, 0x1958dbcd491a4af9),
        Fix192::from_words(0xffffffffff96c541, 0x42f5502dd7be7c96, 0x15438415e2ffb473),
        Fix192::from_words(0x0000000001ead4db, 0xe2f51eac5f9a9b73, 0x33f81dae2fbbc6eb),
        Fix192::from_words(0xfffffffff8d4e0e7, 0xf14bf82f9c024d20, 0x82e64af6c2a32cdb),
        Fix192::from_words(0x0000000015aab3b6, 0x5feabff71470110a, 0x5d888a420a91f64f),
        Fix192::from_words(0xffffffffca4f8140, 0xfd3e76d77d3685df, 0x799c3e425c5f7396),
        Fix192::from_words(0x000000006e649b3a, 0x9fcd32ece9947aa2, 0x026bf1715cc91491),
        Fix192::from_words(0xffffffff41ec6c2e, 0x52e252295a3da220, 0x65fee224b2767dbf),
        Fix192::from_words(0x0000000113d40ed4, 0x50f2082ea4b1f552, 0xb45c1540dee06c45),
        Fix192::from_words(0xfffffffead4f6015, 0xa9629804e5269ecb, 0x436e0617abf25ee8),
        Fix192::from_words(0x0000000160837227, 0x70a711ab27651a0e, 0x0b428c58a3d479a9),
        Fix192::from_words(0xfffffffec921c63d, 0xd588382e07bd7cee, 0x4ceffe3c8064d897),
        Fix192::from_words(0x00000000e7a891aa, 0x6e900832986fcd0c, 0x82473d0d6f7110a7),
        Fix192::from_words(0xffffffff6ededd33, 0xf3ce8c899287fa6d, 0xf324e3faf702793c),
        Fix192::from_words(0x000000004bd13d3e, 0x4b536122fd8bb6c8, 0xe0251342f829d986),
        Fix192::from_words(0xffffffffdf5d368b, 0x92a418f300eca1e6, 0x245639eb3e72dd9b),
        Fix192::from_words(0x000000000b60a2f7, 0x996a939e46560242, 0x0b55d0286a68582d),
        Fix192::from_words(0xfffffffffcde114f, 0xa6f915cc889b750b, 0xbe7e9fbcb5bdc183),
        Fix192::from_words(0x0000000000a7db80, 0xad2e702a2fbc3b78, 0x4b96530af8110453),
        Fix192::from_words(0xffffffffffe6e585, 0xf7639c1943d1690f, 0x7ec65b5a93fa3f3c),
        Fix192::from_words(0x00000000000263bf, 0x3d783f4c83bf22c9, 0xc3d16fb470035294),
        Fix192::from_words(0xffffffffffffe424, 0xc9ec42b3e5aa7bb3, 0x00811457cbf5d3f4),
    ],
    [
        Fix192::from_words(0xfffffffffffcf162, 0x99a4d884e1ea0e23, 0xba7f625b7ce0cc2e),
        Fix192::from_words(0x00000000001249f1, 0x7c602b5533304043, 0x8c0ad9b1ca2e0737),
        Fix192::from_words(0xffffffffff9f810f, 0xd5680458c39d52e8, 0x73232e4e64ec0d0b),
        Fix192::from_words(0x0000000001af030d, 0x6f33e40fb7aa35ae, 0x71b5e301c96ffb80),
        Fix192::from_words(0xfffffffff9f8da5a, 0x689e39ba3749b2c4, 0x7a233bca96e77ede),
        Fix192::from_words(0x0000000011727479, 0x2ac7c09673729301, 0xbdb0ab70da63caf7),
        Fix192::from_words(0xffffffffd6998ba1, 0x6cae2a539df9750c, 0x8c1d647fb0458681),
        Fix192::from_words(0x000000005184004d, 0xe71a13da457ab3a1, 0x4f5a1784a8ee8852),
        Fix192::from_words(0xffffffff79987b9b, 0x4496ab24d10879bc, 0xbdc4b7ecc9e9f666),
        Fix192::from_words(0x00000000bac562b4, 0x56e6d127f26fe488, 0x3f043ea20d8617cc),
        Fix192::from_words(0xffffffff246301af, 0x24cb91f33c3c0130, 0xe9ca8b45cd57fff4),
        Fix192::from_words(0x00000000dae2c39f, 0x3d64ae415d566177, 0x49357f6209598eb9),
        Fix192::from_words(0xffffffff47282022, 0xef82d01661ff5ebf, 0xccb8f9f5127785fd),
        Fix192::from_words(0x0000000083e7af41, 0x190861301f5b3795, 0x937bee3caf0654a8),
        Fix192::from_words(0xffffffffb0de1be6, 0xc408ccc55923d52f, 0x3357bfb7d38553a7),
        Fix192::from_words(0x00000000279647a3, 0x27d6a2610d64af64, 0x3a4db8aa107364aa),
        Fix192::from_words(0xffffffffefae9b45, 0xc9520c79807650f3, 0x122b1cf59f386833),
        Fix192::from_words(0x000000000572933e, 0xd1de023cc513f1b2, 0x8306b24adae97689),
        Fix192::from_words(0xfffffffffe904ff8, 0x5ab6b31d58b8d2e5, 0x96c21d3849051324),
        Fix192::from_words(0x000000000049b332, 0xd6a33fcae6ad2646, 0x93026d01c8b93dcb),
        Fix192::from_words(0xfffffffffff571ff, 0xd833271c19fcbf83, 0x35b12effc0fe4bd6),
        Fix192::from_words(0x000000000000f64d, 0x9c8d3bbb88a766dd, 0xe9c94aec1f049ed2),
        Fix192::from_words(0xfffffffffffff542, 0x8ace19da74eb7c84, 0xe53d1a32009a8140),
    ],
    [
        Fix192::from_words(0xfffffffffffcfa8f, 0x12fcb546b2d01d14, 0xbc70e07c7ff1e8ea),
        Fix192::from_words(0x0000000000118371, 0xbb8c99f036585541, 0xa215d096ab752b14),
        Fix192::from_words(0xffffffffffa7834e, 0x4b5d7b17ad2524a2, 0xc7331a02fdab1980),
        Fix192::from_words(0x00000000017a7b99, 0x82462ce1e732a9a0, 0x02bfaf0f47b6ac27),
        Fix192::from_words(0xfffffffffaee5f88, 0x1e204875ceb6e78c, 0x6ef10181d465d305),
        Fix192::from_words(0x000000000e0c975d, 0xe9b2764d62904e84, 0xf842ad2ee71440bf),
        Fix192::from_words(0xffffffffe013796c, 0xc9ef61c302fdb231, 0x3ef3099f92a0aa60),
        Fix192::from_words(0x000000003c313473, 0x4f4487ba40bc43af, 0x5163e552a41a48b0),
        Fix192::from_words(0xffffffffa0f63617, 0x29712914ad1ed110, 0x32ff7112593a8383),
        Fix192::from_words(0x000000007e77c574, 0x83a850b684d897cc, 0x07c52d2473550496),
        Fix192::from_words(0xffffffff7199322a, 0xbf2503187e9ea0b1, 0x84b71a7e885648cf),
        Fix192::from_words(0x0000000087e99ad4, 0x5b0c83238864f883, 0xd422b42f95bf640e),
        Fix192::from_words(0xffffffff92176f2e, 0x6135d073e613a889, 0x0c64f805889352e6),
        Fix192::from_words(0x000000004b1b20b1, 0xec6f1b56e4daf664, 0x2883e6aa16cef3fc),
        Fix192::from_words(0xffffffffd4da4e7d, 0x893c636526f153ac, 0x1db2cb3e73b4b33a),
        Fix192::from_words(0x0000000014ab7b3a, 0xdbaa074459d47928, 0xc2466cbfe525eb45),
        Fix192::from_words(0xfffffffff7d74da2, 0xe4a9063cc03b2879, 0x89158e7acf9c973b),
        Fix192::from_words(0x00000000029bb991, 0xe6004470a0e0211f, 0x6d1df469a0c68626),
        Fix192::from_words(0xffffffffff576a1b, 0xa701d4826b26f928, 0xaabfba365a519497),
        Fix192::from_words(0x0000000000205be3, 0xbadab69545acaf10, 0x53edf5a5765cd7e3),
        Fix192::from_words(0xfffffffffffb8ff2, 0xdd31ab7827f5a157, 0x9c0bb47d482acefb),
        Fix192::from_words(0x000000000000632a, 0xced5371da249219c, 0xdec2095f7e0741ca),
        Fix192::from_words(0xfffffffffffffbdb, 0xf06951b8aca170da, 0xc7cc740807bb60bb),
    ],
    [
        Fix192::from_words(0xfffffffffffd03bb, 0x8c54920883b62c05, 0xbe625e9d830305a5),
        Fix192::from_words(0x000000000010c55c, 0x668e7b41f11eeebe, 0x7820e46615a7c6ba),
        Fix192::from_words(0xffffffffffaedb63, 0x4b0592658eb48fdb, 0x5901cda72a83010d),
        Fix192::from_words(0x00000000014c5b0a, 0x64a93c11c5da2e06, 0xfcd8eedd6be33b74),
        Fix192::from_words(0xfffffffffbbcd48b, 0x5356a26bf9fa5125, 0x9ccd31138331e83a),
        Fix192::from_words(0x000000000b502342, 0xe6cd0ab1e58458a6, 0x6ff4ce9441737c94),
        Fix192::from_words(0xffffffffe7621f07, 0x9ac6fb610bc1f926, 0x9aedd59fb0b665e4),
        Fix192::from_words(0x000000002c725bbb, 0x90c8daa4eb741498, 0x412b8ac651669f07),
        Fix192::from_words(0xffffffffbccc3dcd, 0xa24b559268843cde, 0x5ee25bf664f73ea6),
        Fix192::from_words(0x0000000055a288b0, 0x593d43f5fe285274, 0x12f6004efe867757),
        Fix192::from_words(0xffffffffa3a9fbec, 0xff0c1938b2a30371, 0xecb14bd6f385e34b),
        Fix192::from_words(0x0000000054645adf, 0x229539535e02193d, 0x008e10dc0b738f9a),
        Fix192::from_words(0xffffffffbea5e5df, 0x617c1f79f60d1f9a, 0xc874250748091891),
        Fix192::from_words(0x000000002ac3d137, 0xf9c4b1d45f47357e, 0x9da52de9fafc4aa2),
        Fix192::from_words(0xffffffffe8794b00, 0x03cce1f3ea65d0df, 0x93d2fbd39e41cd23),
        Fix192::from_words(0x000000000acae0ac, 0x69901f0ddc2d6c94, 0x4de1f49bef864ca8),
        Fix192::from_words(0xfffffffffbeba6d1, 0x7254831e601d943c, 0xc48ac73d67ce6066),
        Fix192::from_words(0x00000000013fb530, 0x59fb1dbff025aee6, 0x2e80f5340a4415ce),
        Fix192::from_words(0xffffffffffb2b404, 0xef62b73e6bd0e7d6, 0xaf691505b87b7ccb),
        Fix192::from_words(0x00000000000e3526, 0x5540ecf57b8d2cf5, 0x9b736b97de3a3975),
        Fix192::from_words(0xfffffffffffe2259, 0x693b3396aad6b5f6, 0x5f895e18ad3108d0),
        Fix192::from_words(0x00000000000027ed, 0x4d5c201556b7c590, 0x66d4e7ad4201fb8a),
        Fix192::from_words(0xfffffffffffffe67, 0x4a6849f7937e5dc9, 0xe00cfb00a19152dc),
    ],
    [
        Fix192::from_words(0xfffffffffffd0ce8, 0x05ac6eca549c3af6, 0xc053dcbe86142260),
        Fix192::from_words(0x0000000000100f56, 0x2641e1cb952321bb, 0xe1fd06fb0e010192),
        Fix192::from_words(0xffffffffffb5976e, 0x413c0687139aa07b, 0xb9ef955b35abe364),
        Fix192::from_words(0x000000000123d9a3, 0x0dea84838207bd16, 0x7675c004185bffd6),
        Fix192::from_words(0xfffffffffc6a7073, 0xf8a5fc17ce012690, 0x4173257b6151986b),
        Fix192::from_words(0x00000000091c19d5, 0x8d617d6f24819a55, 0x8c8dee73d3092549),
        Fix192::from_words(0xffffffffed04964f, 0xc4989ff54745382e, 0x05d1b5e5725fcfef),
        Fix192::from_words(0x0000000020d1edb4, 0xd279a4c766fdced5, 0xccd10843c23cd267),
        Fix192::from_words(0xffffffffd07b1b0b, 0x94b8948a568f6888, 0x197fb8892c9dd42f),
        Fix192::from_words(0x0000000039fc5b49, 0xe2e29643bf7f4fef, 0x4642e1635e844982),
        Fix192::from_words(0xffffffffc420a49a, 0x9962825b5de8c782, 0xdcb5497d23c8dc8d),
        Fix192::from_words(0x000000003466c4bc, 0x1e47cb08ddaa1a7b, 0x5f01ae8a8f700a9a),
        Fix192::from_words(0xffffffffd92438c7, 0xbab10705c0f7af9d, 0xc99dffc7900cdbc6),
        Fix192::from_words(0x0000000018599ffb, 0xca178cec8988f08f, 0x0fee12ccfb53dbd1),
        Fix192::from_words(0xfffffffff32c1880, 0x289cfd79af42a025, 0xb30fef6372e66f22),
        Fix192::from_words(0x0000000005a299af, 0xaeb66ce701fb6660, 0xb748a3dc0e6187f6),
        Fix192::from_words(0xfffffffffdf5d368, 0xb92a418f300eca1e, 0x6245639eb3e73261),
        Fix192::from_words(0x000000000099139c, 0x55fd35bece4c3254, 0xdf228ee332b1ba4b),
        Fix192::from_words(0xffffffffffdc8f2b, 0xbbdea0cd943bf50d, 0xdf02d35953a967c3),
        Fix192::from_words(0x0000000000063cf0, 0x222bacaa036fe92a, 0xbe801ca85b90b8bb),
        Fix192::from_words(0xffffffffffff372c, 0x2fbb1ce0ca1e8b48, 0x7bf632dad49fd1fc),
        Fix192::from_words(0x0000000000001013, 0x53bc0a3ae7db4e61, 0x9c2c9baae8c215d5),
        Fix192::from_words(0xffffffffffffff62, 0x6bc703b54a778866, 0xab6fdaf5eea26dea),
    ],
    [
        Fix192::from_words(0xfffffffffffd1614, 0x7f044b8c258249e7, 0xc2455adf89253f1b),
        Fix192::from_words(0x00000000000f6107, 0x82e131f9ba4b6fa2, 0x8c38bc74881d7270),
        Fix192::from_words(0xffffffffffbbc462, 0x8a0c6f20825ea5f2, 0x57ff468758f18542),
        Fix192::from_words(0x00000000010047fe, 0x3e14dea605ec1c14, 0xaa4d51cfedab066b),
        Fix192::from_words(0xfffffffffcfc6d2d, 0x344f1cdd1ba4d962, 0x3d119de54b73c4fd),
        Fix192::from_words(0x000000000755e9b9, 0x985a5aaf53b79850, 0x0655c646d75e5595),
        Fix192::from_words(0xfffffffff15ce165, 0x540aa1d6b667b6b3, 0xc22505164911f798),
        Fix192::from_words(0x00000000183c1808, 0x0510e258911d78d9, 0x4645ed081613beb7),
        Fix192::from_words(0xffffffffde661ee6, 0xd125aac934421e6f, 0x2f712dfb327af977),
        Fix192::from_words(0x00000000274386b0, 0x7d980c1a0562cb7f, 0xd675b8fcc9abe08c),
        Fix192::from_words(0xffffffffd92d7046, 0x8fee26dd3145cfd8, 0xbc9d8aa61ec9640c),
        Fix192::from_words(0x0000000020899e16, 0x397efc28cdb61491, 0x41f5aa80b98b34d7),
        Fix192::from_words(0xffffffffe8e50404, 0x5df05a02cc3febd7, 0xf9971f3ea24f7082),
        Fix192::from_words(0x000000000ddd63ff, 0x59a73ad1bccaf7d9, 0x53fcc40c55045416),
        Fix192::from_words(0xfffffffff9017040, 0xab7685d4b4792b25, 0x7856c45b398ed64c),
        Fix192::from_words(0x0000000002f13c1f, 0x786a9e656351304b, 0x486095d344a65e6d),
        Fix192::from_words(0xfffffffffefae9b4, 0x5c9520c79807650f, 0x3122b1cf59f38e08),
        Fix192::from_words(0x0000000000494b17, 0x9f8dc59a33966631, 0x603f0244815dee24),
        Fix192::from_words(0xffffffffffefc016, 0xe89466271955aafb, 0x35bf33e9a622bf08),
        Fix192::from_words(0x000000000002bd28, 0x0ded7341eb71b906, 0xffc68d38a7095365),
        Fix192::from_words(0xffffffffffffab8f, 0xfec19938e0cfe5fc, 0x19ad8977fe07f262),
        Fix192::from_words(0x0000000000000678, 0xec727e041a098679, 0x4f5ec5da5bd5a715),
        Fix192::from_words(0xffffffffffffffc3, 0x3eb7cef83c5168e6, 0xfc9e2acd992bb1f8),
    ],
];

/// Polynomial for e^f on f in [0, 1), low degree first.
pub(crate) const EXP_FRAC_COEFFS: [Fix192; 31] = [
    Fix192::from_words(0x000000000000d3c2, 0x1bcecceda1000000, 0x0000000000000002),
    Fix192::from_words(0x000000000000d3c2, 0x1bcecceda0ffffff, 0xffffffffffffff97),
    Fix192::from_words(0x00000000000069e1, 0x0de76676d0800000, 0x0000000000000c4f),
    Fix192::from_words(0x000000000000234b, 0x04a2777cf02aaaaa, 0xaaaaaaaaaaa9bcd6),
    Fix192::from_words(0x00000000000008d2, 0xc1289ddf3c0aaaaa, 0xaaaaaaaaaab7aa45),
    Fix192::from_words(0x00000000000001c3, 0xc03b52c63f355555, 0x5555555554c90a97),
    Fix192::from_words(0x000000000000004b, 0x4ab48dcbb5338e38, 0xe38e38e392f7e6b9),
    Fix192::from_words(0x000000000000000a, 0xc18781f88799a69a, 0x69a69a6984ba4fd8),
    Fix192::from_words(0x0000000000000001, 0x5830f03f10f334d3, 0x4d34d34dffe95543),
    Fix192::from_words(0x0000000000000000, 0x263e53953ac5b089, 0x4177a5af31af7a7c),
    Fix192::from_words(0x0000000000000000, 0x03d3085bb913c4da, 0x868bf70a21c6a0ae),
    Fix192::from_words(0x0000000000000000, 0x005900c2853057b6, 0xc669d05e4a9b2ba6),
    Fix192::from_words(0x0000000000000000, 0x00076abae06eb1f9, 0xe5de279a51f26e78),
    Fix192::from_words(0x0000000000000000, 0x0000920e600883d8, 0x255fd903da2b986c),
    Fix192::from_words(0x0000000000000000, 0x00000a6ebdb77721, 0xb986df7322d3d817),
    Fix192::from_words(0x0000000000000000, 0x000000b20ca5d4bd, 0xfb4d32ab8d8f35f7),
    Fix192::from_words(0x0000000000000000, 0x0000000b20ca5d4b, 0xdfb4f20519d6c664),
    Fix192::from_words(0x0000000000000000, 0x00000000a7936ee6, 0x5873d7ca383da659),
    Fix192::from_words(0x0000000000000000, 0x00000000094f4d45, 0xaf94fd209d456670),
    Fix192::from_words(0x0000000000000000, 0x00000000007d6fdb, 0x3f22560e60c152f6),
    Fix192::from_words(0x0000000000000000, 0x0000000000064597, 0xc328a8faf4f02a6f),
    Fix192::from_words(0x0000000000000000, 0x0000000000004c74, 0xf0e8fc7112916d6b),
    Fix192::from_words(0x0000000000000000, 0x0000000000000379, 0xaddc8fedeb9b3512),
    Fix192::from_words(0x0000000000000000, 0x0000000000000026, 0xae839e98f979288e),
    Fix192::from_words(0x0000000000000000, 0x0000000000000001, 0x9c9b1661b8d24831),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x1080eeace9fb06ed),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x00a29131f3ea6ab6),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0005fec32258cf67),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000038b3fa554069),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000019070d636be),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000001ab2306a0d),
];

/// Polynomial for sin on [0, pi/2], low degree first (even terms zero).
pub(crate) const SIN_COEFFS: [Fix192; 32] = [
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0x000000000000d3c2, 0x1bcecceda1000000, 0x0000000000000000),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0xffffffffffffdcb4, 0xfb5d88830fd55555, 0x5555555555555555),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0x00000000000001c3, 0xc03b52c63f355555, 0x5555555555555555),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0xfffffffffffffff5, 0x3e787e0778665965, 0x9659659659659659),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0x0000000000000000, 0x263e53953ac5b089, 0x4177a5b33ec22506),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0xffffffffffffffff, 0xffa6ff3d7acfa849, 0x39962f5dc9e6f65b),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0x0000000000000000, 0x0000920e600883d8, 0x255fdb9803a0fb24),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0xffffffffffffffff, 0xffffff4df35a2b42, 0x04b2be58443fd7cb),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0x0000000000000000, 0x00000000a7936ee6, 0x58740c7a07474b71),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0xffffffffffffffff, 0xffffffffff829024, 0xc0dd3a5977beab32),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0x0000000000000000, 0x0000000000004c74, 0xf0e987c8ee09e86e),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0xffffffffffffffff, 0xffffffffffffffd9, 0x517bff39c8e3a5fe),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x108112c64dbec46b),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0xffffffffffffffff, 0xffffffffffffffff, 0xfff9fb3b8616b3de),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x000001e5c25b668f),
    Fix192::from_words(0x0000000000000000, 0x0000000000000000, 0x0000000000000000),
    Fix192::from_words(0xffffffffffffffff, 0xffffffffffffffff, 0xffffffff7a491f8c),
];
