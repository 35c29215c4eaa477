use safe_drive::msg::common_interfaces::sensor_msgs;

use crate::error::ToFixError;

/// Geodetic origin of the local ENU frame. Degrees for latitude and
/// longitude, metres for altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Datum {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Datum {
    pub fn new(latitude: f64, longitude: f64, altitude: f64)->Result<Self, ToFixError> {
        if !(latitude.is_finite() && longitude.is_finite() && altitude.is_finite())
            || latitude.abs() > 90.0
        {
            return Err(ToFixError::InvalidDatum { latitude, longitude, altitude });
        }

        Ok(Datum { latitude, longitude, altitude })
    }

}

impl TryFrom<&sensor_msgs::msg::NavSatFix> for Datum {
    type Error = ToFixError;

    fn try_from(fix: &sensor_msgs::msg::NavSatFix)->Result<Self, Self::Error> {
        Datum::new(fix.latitude, fix.longitude, fix.altitude)
    }
}

/// Holds the datum used for conversion. Starts at the zero datum and
/// captures the first usable datum offered; later offers are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatumLatch {
    datum: Datum,
    captured: bool,
}

impl DatumLatch {
    pub fn datum(&self)->&Datum {
        &self.datum
    }

    pub fn is_captured(&self)->bool {
        self.captured
    }

    /// Returns `Ok(true)` when `fix` became the datum, `Ok(false)` when a
    /// datum was already captured. An unusable fix leaves the latch open.
    pub fn offer(&mut self, fix: &sensor_msgs::msg::NavSatFix)->Result<bool, ToFixError> {
        if self.captured {
            return Ok(false);
        }

        self.datum = Datum::try_from(fix)?;
        self.captured = true;
        Ok(true)
    }
}
