use safe_drive::{
    context::Context,
    error::DynError,
    logger::Logger,
    msg::common_interfaces::{nav_msgs, sensor_msgs},
    pr_info,
};

use async_std;
use enu_to_fix::{params::{datum_qos, ToFixParams}, to_fix_task};

const NODE_NAME: &str = "to_fix";

#[async_std::main]
async fn main()->Result<(), DynError>
{
    let ctx = Context::new()?;
    let node = ctx.create_node(NODE_NAME, None, Default::default())?;

    let params = ToFixParams::load(NODE_NAME);
    let log = Logger::new("ToFix");
    pr_info!(log, "{:?}", params);

    let sub_datum = node.create_subscriber::<sensor_msgs::msg::NavSatFix>(&params.datum_topic, Some(datum_qos()))?;
    let sub_odom = node.create_subscriber::<nav_msgs::msg::Odometry>(&params.odom_topic, None)?;
    let pub_fix = node.create_publisher::<sensor_msgs::msg::NavSatFix>(&params.fix_topic, None)?;

    let task = async_std::task::spawn(to_fix_task(
        sub_datum,
        sub_odom,
        pub_fix,
        params.frame_override().map(str::to_string),
    ));

    task.await?;

    Ok(())
}
