use safe_drive::{
    error::DynError,
    msg::common_interfaces::{nav_msgs, sensor_msgs},
    msg::RosString,
};

use crate::datum::Datum;
use crate::enu::{enu_to_llh, EnuOffset};
use crate::error::ToFixError;

/// `sensor_msgs/NavSatFix` covariance type: only the diagonal is known.
pub const COVARIANCE_TYPE_DIAGONAL_KNOWN: u8 = 2;

/// Row-major diagonal of the 6x6 pose covariance (x, y, z) paired with
/// the diagonal of the 3x3 position covariance.
const COVARIANCE_DIAGONAL: [(usize, usize); 3] = [(0, 0), (7, 4), (14, 8)];

/// Builds the fix for one odometry message. The output frame is the
/// odometry child frame unless `frame_override` is given.
pub fn odometry_to_fix(
    odom: &nav_msgs::msg::Odometry,
    datum: &Datum,
    frame_override: Option<&str>,
)->Result<sensor_msgs::msg::NavSatFix, DynError>
{
    let position = &odom.pose.pose.position;
    let llh = enu_to_llh(
        datum,
        &EnuOffset { east: position.x, north: position.y, up: position.z },
    )?;

    let mut fix = sensor_msgs::msg::NavSatFix::new().ok_or("failed to allocate NavSatFix")?;
    fix.latitude = llh.latitude;
    fix.longitude = llh.longitude;
    fix.altitude = llh.altitude;

    // Axes are independent, the off-diagonal terms stay zero.
    for (pose_idx, fix_idx) in COVARIANCE_DIAGONAL {
        fix.position_covariance[fix_idx] = odom.pose.covariance[pose_idx];
    }
    fix.position_covariance_type = COVARIANCE_TYPE_DIAGONAL_KNOWN;

    let frame_id = match frame_override {
        Some(frame_id) => frame_id.to_string(),
        None => odom.child_frame_id.get_string(),
    };
    fix.header.frame_id = RosString::new(&frame_id).ok_or(ToFixError::FrameId(frame_id))?;
    fix.header.stamp.sec = odom.header.stamp.sec;
    fix.header.stamp.nanosec = odom.header.stamp.nanosec;

    Ok(fix)
}
