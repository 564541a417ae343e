/// Two weeks in seconds: the expected duration of one 2016-block epoch.
pub const RETARGET_PERIOD: u64 = 1_209_600;

/// The difficulty-1 proof-of-work target, 0xffff << 208.
pub const DIFF_ONE_TARGET: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00,
];

/// Upper bound on an accepted vin/vout buffer. A serialized transaction can
/// never exceed the consensus block size, so anything larger is rejected
/// before the element walk starts.
pub const MAX_TX_VECTOR_BYTES: usize = 1_000_000;
