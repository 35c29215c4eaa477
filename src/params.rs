use ros2_rust_util::get_str_parameter;
use safe_drive::qos::{policy::DurabilityPolicy, Profile};

pub const DEFAULT_DATUM_TOPIC: &str = "datum";
pub const DEFAULT_ODOM_TOPIC: &str = "odom";
pub const DEFAULT_FIX_TOPIC: &str = "novatel/gps_fix";

/// Node parameters, read once at start up.
#[derive(Debug, Clone, PartialEq)]
pub struct ToFixParams {
    pub datum_topic: String,
    pub odom_topic: String,
    pub fix_topic: String,

    /// Empty keeps the odometry child frame.
    pub fix_frame_id: String,
}

impl Default for ToFixParams {
    fn default()->Self {
        Self {
            datum_topic: DEFAULT_DATUM_TOPIC.into(),
            odom_topic: DEFAULT_ODOM_TOPIC.into(),
            fix_topic: DEFAULT_FIX_TOPIC.into(),
            fix_frame_id: String::new(),
        }
    }
}

impl ToFixParams {
    pub fn load(node_name: &str)->Self {
        let defaults = Self::default();

        Self {
            datum_topic: get_str_parameter(node_name, "datum_topic", &defaults.datum_topic).into(),
            odom_topic: get_str_parameter(node_name, "odom_topic", &defaults.odom_topic).into(),
            fix_topic: get_str_parameter(node_name, "fix_topic", &defaults.fix_topic).into(),
            fix_frame_id: get_str_parameter(node_name, "fix_frame_id", &defaults.fix_frame_id).into(),
        }
    }

    pub fn frame_override(&self)->Option<&str> {
        let frame_id = self.fix_frame_id.trim();
        if frame_id.is_empty() {
            None
        }
        else {
            Some(frame_id)
        }
    }
}

/// QoS of the datum subscription. The datum is usually latched by its
/// publisher before this node starts.
pub fn datum_qos()->Profile {
    Profile {
        depth: 1,
        durability: DurabilityPolicy::TransientLocal,
        ..Default::default()
    }
}
