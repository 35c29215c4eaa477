pub mod datum;
pub mod enu;
pub mod error;
pub mod fix;
pub mod params;

use futures::FutureExt;
use safe_drive::{
    error::DynError,
    logger::Logger,
    msg::common_interfaces::{nav_msgs, sensor_msgs},
    topic::{publisher::Publisher, subscriber::Subscriber},
    pr_info, pr_warn,
};

use crate::datum::{Datum, DatumLatch};
use crate::fix::odometry_to_fix;

/// Converts every odometry message into a fix against the current datum.
///
/// The datum subscription is one-shot: it is dropped as soon as a usable
/// datum arrives. Until then the zero datum is used.
pub async fn to_fix_task(
    sub_datum: Subscriber<sensor_msgs::msg::NavSatFix>,
    mut sub_odom: Subscriber<nav_msgs::msg::Odometry>,
    pub_fix: Publisher<sensor_msgs::msg::NavSatFix>,
    frame_override: Option<String>,
)->Result<(), DynError>
{
    let log = Logger::new("ToFix");

    pr_info!(
        log,
        "Start ToFix. datum:{} odom:{} fix:{}",
        sub_datum.get_topic_name(),
        sub_odom.get_topic_name(),
        pub_fix.get_topic_name()
    );

    let mut latch = DatumLatch::default();
    let mut sub_datum = Some(sub_datum);
    let frame_override = frame_override.as_deref();

    loop {
        let Some(sub) = sub_datum.as_mut() else {
            let odom = sub_odom.recv().await?;
            publish_fix(&log, &pub_fix, &odom, latch.datum(), frame_override)?;
            continue;
        };

        let mut received = None;
        futures::select! {
            msg = sub.recv().fuse() => received = Some(msg?),
            odom = sub_odom.recv().fuse() => {
                publish_fix(&log, &pub_fix, &odom?, latch.datum(), frame_override)?;
            }
        }

        if let Some(msg) = received {
            match latch.offer(&msg) {
                Ok(_) => {
                    let datum = latch.datum();
                    pr_info!(
                        log,
                        "Datum set: lat {} lon {} alt {}",
                        datum.latitude,
                        datum.longitude,
                        datum.altitude
                    );
                    sub_datum = None;
                }
                Err(e) => {
                    pr_warn!(log, "Ignoring datum: {}", e);
                }
            }
        }
    }
}

fn publish_fix(
    log: &Logger,
    pub_fix: &Publisher<sensor_msgs::msg::NavSatFix>,
    odom: &nav_msgs::msg::Odometry,
    datum: &Datum,
    frame_override: Option<&str>,
)->Result<(), DynError>
{
    match odometry_to_fix(odom, datum, frame_override) {
        Ok(fix) => {
            pub_fix.send(&fix)?;
        }
        Err(e) => {
            pr_warn!(log, "Dropping odometry: {}", e);
        }
    }

    Ok(())
}
