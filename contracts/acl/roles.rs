//! Protocol role identifiers.
//!
//! Every identifier is the keccak-256 hash of its own name, so any party can
//! recompute it off-chain.

pub type RoleId = [u8; 32];

/// Kernel namespace holding app base implementations (`keccak256("base")`).
pub const KERNEL_APP_BASES_NAMESPACE: RoleId = [
    0xf1, 0xf3, 0xeb, 0x40, 0xf5, 0xbc, 0x1a, 0xd1,
    0x34, 0x47, 0x16, 0xce, 0xd8, 0xb8, 0xa0, 0x43,
    0x1d, 0x84, 0x0b, 0x57, 0x83, 0xae, 0xa1, 0xfd,
    0x01, 0x78, 0x6b, 0xc2, 0x6f, 0x35, 0xac, 0x0f,
];

pub const MANAGE_SIGNING_KEYS: RoleId = [
    0x75, 0xab, 0xc6, 0x44, 0x90, 0xe1, 0x7b, 0x40,
    0xea, 0x1e, 0x66, 0x69, 0x1c, 0x3e, 0xb4, 0x93,
    0x64, 0x7b, 0x24, 0x43, 0x0b, 0x35, 0x8b, 0xd8,
    0x7e, 0xc3, 0xe5, 0x12, 0x7f, 0x16, 0x21, 0xee,
];

pub const MANAGE_NODE_OPERATOR_ROLE: RoleId = [
    0x78, 0x52, 0x38, 0x50, 0xfd, 0xd7, 0x61, 0x61,
    0x2f, 0x46, 0xe8, 0x44, 0xcf, 0x5a, 0x16, 0xbd,
    0xa6, 0xb3, 0x15, 0x1d, 0x6a, 0xe9, 0x61, 0xfd,
    0x7e, 0x8e, 0x7b, 0x92, 0xbf, 0xbc, 0xa7, 0xf8,
];

pub const SET_NODE_OPERATOR_LIMIT_ROLE: RoleId = [
    0x07, 0xb3, 0x9e, 0x0f, 0xaf, 0x25, 0x21, 0x00,
    0x1a, 0xe4, 0xe5, 0x8c, 0xb9, 0xff, 0xd3, 0x84,
    0x0a, 0x63, 0xe2, 0x05, 0xd2, 0x88, 0xdc, 0x9c,
    0x93, 0xc3, 0x77, 0x4f, 0x0d, 0x79, 0x47, 0x54,
];

pub const STAKING_ROUTER_ROLE: RoleId = [
    0xbb, 0x75, 0xb8, 0x74, 0x36, 0x0e, 0x0b, 0xfd,
    0x87, 0xf9, 0x64, 0xea, 0xdd, 0x82, 0x76, 0xd8,
    0xef, 0xb7, 0xc9, 0x42, 0x13, 0x4f, 0xc3, 0x29,
    0xb5, 0x13, 0x03, 0x2d, 0x08, 0x03, 0xe0, 0xc6,
];

pub const STAKING_MODULE_MANAGE_ROLE: RoleId = [
    0x31, 0x05, 0xbc, 0xbf, 0x19, 0xd4, 0x41, 0x7b,
    0x73, 0xae, 0x0e, 0x58, 0xd5, 0x08, 0xa6, 0x5e,
    0xcf, 0x75, 0x66, 0x5e, 0x46, 0xc2, 0x62, 0x2d,
    0x85, 0x21, 0x73, 0x2d, 0xe6, 0x08, 0x0c, 0x48,
];

pub const REQUEST_BURN_SHARES_ROLE: RoleId = [
    0x4b, 0xe2, 0x9e, 0x0e, 0x4e, 0xb9, 0x1f, 0x98,
    0xf7, 0x09, 0xd9, 0x88, 0x03, 0xcb, 0xa2, 0x71,
    0x59, 0x27, 0x82, 0xe2, 0x93, 0xb8, 0x4a, 0x62,
    0x5e, 0x02, 0x5c, 0xbb, 0x40, 0x19, 0x7b, 0xa8,
];
