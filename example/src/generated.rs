// autogenerated with mavgen. do not edit.

//! icarous dialect.

use mavgen::{Dialect, FieldInfo, Message, MessageInfo};

// icarous.xml

/// ICAROUS heartbeat
#[derive(Debug, Clone, PartialEq)]
pub struct MessageIcarousHeartbeat {
    /// See the FMS_STATE enum.
    pub status: u8,
}

impl Message for MessageIcarousHeartbeat {
    const ID: u32 = 42000;
    const NAME: &'static str = "ICAROUS_HEARTBEAT";
    const FIELDS: &'static [FieldInfo] = &[
        FieldInfo::new("status", "status", "uint8_t").with_enum("ICAROUS_FMS_STATE"),
    ];

    fn id(&self) -> u32 {
        42000
    }
}

/// Kinematic multi bands (track) output from Daidalus
#[derive(Debug, Clone, PartialEq)]
pub struct MessageIcarousKinematicBands {
    /// Number of track bands
    pub num_bands: i8,
    /// See the TRACK_BAND_TYPES enum.
    pub type1: u8,
    /// min angle (degrees)
    pub min1: f32,
    /// max angle (degrees)
    pub max1: f32,
    /// See the TRACK_BAND_TYPES enum.
    pub type2: u8,
    /// min angle (degrees)
    pub min2: f32,
    /// max angle (degrees)
    pub max2: f32,
    /// See the TRACK_BAND_TYPES enum.
    pub type3: u8,
    /// min angle (degrees)
    pub min3: f32,
    /// max angle (degrees)
    pub max3: f32,
    /// See the TRACK_BAND_TYPES enum.
    pub type4: u8,
    /// min angle (degrees)
    pub min4: f32,
    /// max angle (degrees)
    pub max4: f32,
    /// See the TRACK_BAND_TYPES enum.
    pub type5: u8,
    /// min angle (degrees)
    pub min5: f32,
    /// max angle (degrees)
    pub max5: f32,
}

impl Message for MessageIcarousKinematicBands {
    const ID: u32 = 42001;
    const NAME: &'static str = "ICAROUS_KINEMATIC_BANDS";
    const FIELDS: &'static [FieldInfo] = &[
        FieldInfo::new("num_bands", "numBands", "int8_t"),
        FieldInfo::new("type1", "type1", "uint8_t").with_enum("ICAROUS_TRACK_BAND_TYPES"),
        FieldInfo::new("min1", "min1", "float"),
        FieldInfo::new("max1", "max1", "float"),
        FieldInfo::new("type2", "type2", "uint8_t").with_enum("ICAROUS_TRACK_BAND_TYPES"),
        FieldInfo::new("min2", "min2", "float"),
        FieldInfo::new("max2", "max2", "float"),
        FieldInfo::new("type3", "type3", "uint8_t").with_enum("ICAROUS_TRACK_BAND_TYPES"),
        FieldInfo::new("min3", "min3", "float"),
        FieldInfo::new("max3", "max3", "float"),
        FieldInfo::new("type4", "type4", "uint8_t").with_enum("ICAROUS_TRACK_BAND_TYPES"),
        FieldInfo::new("min4", "min4", "float"),
        FieldInfo::new("max4", "max4", "float"),
        FieldInfo::new("type5", "type5", "uint8_t").with_enum("ICAROUS_TRACK_BAND_TYPES"),
        FieldInfo::new("min5", "min5", "float"),
        FieldInfo::new("max5", "max5", "float"),
    ];

    fn id(&self) -> u32 {
        42001
    }
}

/// Every message of the dialect, in resolution order.
pub const MESSAGES: &[MessageInfo] = &[
    // icarous.xml
    MessageInfo::of::<MessageIcarousHeartbeat>(),
    MessageInfo::of::<MessageIcarousKinematicBands>(),
];

pub const DIALECT: Dialect = Dialect::new("icarous", MESSAGES);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IcarousTrackBandTypes(pub u64);

impl IcarousTrackBandTypes {
    pub const ICAROUS_TRACK_BAND_TYPE_NONE: Self = Self(0);
    pub const ICAROUS_TRACK_BAND_TYPE_NEAR: Self = Self(1);
    pub const ICAROUS_TRACK_BAND_TYPE_RECOVERY: Self = Self(2);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IcarousFmsState(pub u64);

impl IcarousFmsState {
    pub const ICAROUS_FMS_STATE_IDLE: Self = Self(0);
    pub const ICAROUS_FMS_STATE_TAKEOFF: Self = Self(1);
    pub const ICAROUS_FMS_STATE_CLIMB: Self = Self(2);
    pub const ICAROUS_FMS_STATE_CRUISE: Self = Self(3);
    pub const ICAROUS_FMS_STATE_APPROACH: Self = Self(4);
    pub const ICAROUS_FMS_STATE_LAND: Self = Self(5);
}
