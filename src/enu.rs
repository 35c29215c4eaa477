use sguaba::{math::RigidBodyTransform, system, systems::Wgs84, Coordinate};
use uom::si::f64::{Angle, Length};
use uom::si::{angle::degree, length::meter};

use crate::datum::Datum;
use crate::error::ToFixError;

// Tangent plane anchored at the datum.
system!(struct DatumEnu using ENU);

/// Offset from the datum in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnuOffset {
    pub east: f64,
    pub north: f64,
    pub up: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Llh {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

pub fn enu_to_llh(datum: &Datum, offset: &EnuOffset)->Result<Llh, ToFixError> {
    if !(offset.east.is_finite() && offset.north.is_finite() && offset.up.is_finite()) {
        return Err(ToFixError::InvalidOffset {
            east: offset.east,
            north: offset.north,
            up: offset.up,
        });
    }

    let origin = Wgs84::builder()
        .latitude(Angle::new::<degree>(datum.latitude))
        .ok_or(ToFixError::InvalidDatum {
            latitude: datum.latitude,
            longitude: datum.longitude,
            altitude: datum.altitude,
        })?
        .longitude(Angle::new::<degree>(datum.longitude))
        .altitude(Length::new::<meter>(datum.altitude))
        .build();

    // SAFETY: `DatumEnu` is by construction the ENU frame whose origin is the datum.
    let ecef_to_enu = unsafe { RigidBodyTransform::ecef_to_enu_at(&origin) };

    let local = Coordinate::<DatumEnu>::from_cartesian(
        Length::new::<meter>(offset.east),
        Length::new::<meter>(offset.north),
        Length::new::<meter>(offset.up),
    );

    let geodetic = ecef_to_enu.inverse_transform(local).to_wgs84();

    Ok(Llh {
        latitude: geodetic.latitude().get::<degree>(),
        longitude: geodetic.longitude().get::<degree>(),
        altitude: geodetic.altitude().get::<meter>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WGS84_A: f64 = 6_378_137.0;
    const WGS84_E2: f64 = 6.694_379_990_14e-3;

    fn close(a: f64, b: f64, tol: f64)->bool {
        (a - b).abs() < tol
    }

    #[test]
    fn zero_offset_is_datum() {
        let datum = Datum::new(43.4723, -80.5449, 329.0).unwrap();
        let llh = enu_to_llh(&datum, &EnuOffset::default()).unwrap();

        assert!(close(llh.latitude, datum.latitude, 1e-9));
        assert!(close(llh.longitude, datum.longitude, 1e-9));
        assert!(close(llh.altitude, datum.altitude, 1e-4));
    }

    #[test]
    fn up_raises_altitude_only() {
        let datum = Datum::new(51.5, -0.12, 20.0).unwrap();
        let llh = enu_to_llh(&datum, &EnuOffset { east: 0.0, north: 0.0, up: 100.0 }).unwrap();

        assert!(close(llh.latitude, 51.5, 1e-9));
        assert!(close(llh.longitude, -0.12, 1e-9));
        assert!(close(llh.altitude, 120.0, 1e-4));
    }

    #[test]
    fn east_at_zero_datum_moves_longitude() {
        let llh = enu_to_llh(
            &Datum::default(),
            &EnuOffset { east: 1000.0, north: 0.0, up: 0.0 },
        )
        .unwrap();

        let expected = (1000.0_f64 / WGS84_A).atan().to_degrees();
        assert!(close(llh.latitude, 0.0, 1e-9));
        assert!(close(llh.longitude, expected, 1e-9));
        // the tangent plane drifts above the ellipsoid
        assert!(llh.altitude > 0.0 && llh.altitude < 0.1);
    }

    #[test]
    fn north_at_zero_datum_moves_latitude() {
        let llh = enu_to_llh(
            &Datum::default(),
            &EnuOffset { east: 0.0, north: 10.0, up: 0.0 },
        )
        .unwrap();

        // meridional radius of curvature at the equator
        let m = WGS84_A * (1.0 - WGS84_E2);
        let expected = (10.0 / m).to_degrees();
        assert!(close(llh.latitude, expected, 1e-9));
        assert!(close(llh.longitude, 0.0, 1e-9));
    }

    #[test]
    fn rejects_non_finite_offset() {
        let err = enu_to_llh(
            &Datum::default(),
            &EnuOffset { east: f64::NAN, north: 0.0, up: 0.0 },
        );
        assert!(matches!(err, Err(ToFixError::InvalidOffset { .. })));
    }
}
