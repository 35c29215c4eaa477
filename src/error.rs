use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToFixError {
    #[error("invalid datum: lat {latitude} lon {longitude} alt {altitude}")]
    InvalidDatum {
        latitude: f64,
        longitude: f64,
        altitude: f64,
    },

    #[error("non-finite ENU offset: e {east} n {north} u {up}")]
    InvalidOffset { east: f64, north: f64, up: f64 },

    #[error("frame id does not fit in a ROS string: {0}")]
    FrameId(String),
}
