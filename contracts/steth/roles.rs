//! Roles the token checks before privileged operations, keccak-256 of their names.

pub use acl::roles::RoleId;

pub const PAUSE_ROLE: RoleId = [
    0x13, 0x9c, 0x28, 0x98, 0x04, 0x0e, 0xf1, 0x69,
    0x10, 0xdc, 0x9f, 0x44, 0xdc, 0x69, 0x7d, 0xf7,
    0x93, 0x63, 0xda, 0x76, 0x7d, 0x8b, 0xc9, 0x2f,
    0x2e, 0x31, 0x03, 0x12, 0xb8, 0x16, 0xe4, 0x6d,
];

pub const MINT_ROLE: RoleId = [
    0x15, 0x4c, 0x00, 0x81, 0x98, 0x33, 0xda, 0xc6,
    0x01, 0xee, 0x5d, 0xdd, 0xed, 0x6f, 0xda, 0x79,
    0xd9, 0xd8, 0xb5, 0x06, 0xb9, 0x11, 0xb3, 0xdb,
    0xd5, 0x4c, 0xdb, 0x95, 0xfe, 0x6c, 0x36, 0x86,
];

pub const BURN_ROLE: RoleId = [
    0xe9, 0x7b, 0x13, 0x72, 0x54, 0x05, 0x8b, 0xd9,
    0x4f, 0x28, 0xd2, 0xf3, 0xeb, 0x79, 0xe2, 0xd3,
    0x40, 0x74, 0xff, 0xb4, 0x88, 0xd0, 0x42, 0xe3,
    0xbc, 0x95, 0x8e, 0x0a, 0x57, 0xd2, 0xfa, 0x22,
];
