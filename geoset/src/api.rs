//! Entry points of the crate: the set operations as reported to the caller.
//!
//! Every entry point validates its arguments, evaluates the operation and normalizes the result. Failures, including
//! panics raised inside the algorithms, are logged once and returned as a [`GisError`] carrying the name of the
//! calling function.

use std::panic::{self, AssertUnwindSafe};

use geoset_types::validate::validate_geometry;
use geoset_types::{CoordinateSystem, Geometry, Srs};

use crate::error::{GisError, SetOpError};
use crate::normalize::normalize_empty;
use crate::operation::{Difference, Intersection, SetOperation, Symdifference, Union};

/// Intersection of the two geometries.
///
/// # Panics
///
/// Panics if the geometries are in different coordinate systems, or if their coordinate system does not match the
/// `srs` (no SRS means cartesian coordinates).
pub fn intersection(
    srs: Option<&Srs>,
    g1: &Geometry,
    g2: &Geometry,
    func_name: &str,
) -> Result<Geometry, GisError> {
    run::<Intersection>(srs, g1, g2, func_name)
}

/// Difference of the two geometries: the part of `g1` not covered by `g2`.
///
/// # Panics
///
/// See [`intersection`].
pub fn difference(
    srs: Option<&Srs>,
    g1: &Geometry,
    g2: &Geometry,
    func_name: &str,
) -> Result<Geometry, GisError> {
    run::<Difference>(srs, g1, g2, func_name)
}

/// Symmetric difference of the two geometries.
///
/// # Panics
///
/// See [`intersection`].
pub fn symdifference(
    srs: Option<&Srs>,
    g1: &Geometry,
    g2: &Geometry,
    func_name: &str,
) -> Result<Geometry, GisError> {
    run::<Symdifference>(srs, g1, g2, func_name)
}

/// Union of the two geometries.
///
/// Returns `Ok(None)` when both geometries are empty, and `Ok(Some(_))` with an empty geometry collection when the
/// union of non-empty geometries happens to be empty.
///
/// # Panics
///
/// See [`intersection`].
pub fn union_(
    srs: Option<&Srs>,
    g1: &Geometry,
    g2: &Geometry,
    func_name: &str,
) -> Result<Option<Geometry>, GisError> {
    if g1.is_empty() && g2.is_empty() {
        check_contract(srs, g1, g2);
        log::debug!("{func_name}: union of two empty geometries is null");
        return Ok(None);
    }

    run::<Union>(srs, g1, g2, func_name).map(Some)
}

fn run<Op: SetOperation>(
    srs: Option<&Srs>,
    g1: &Geometry,
    g2: &Geometry,
    func_name: &str,
) -> Result<Geometry, GisError> {
    check_contract(srs, g1, g2);

    let (semi_major, semi_minor) = srs.map_or((0.0, 0.0), |srs| {
        (srs.semi_major_axis(), srs.semi_minor_axis())
    });
    log::debug!(
        "{func_name}: {} of {} and {} in {} coordinates",
        Op::NAME,
        g1.geometry_type(),
        g2.geometry_type(),
        g1.coordinate_system()
    );

    let result = panic::catch_unwind(AssertUnwindSafe(|| -> Result<Geometry, SetOpError> {
        validate_geometry(g1)?;
        validate_geometry(g2)?;

        let op = Op::new(semi_major, semi_minor);
        op.eval(g1, g2).map(normalize_empty)
    }))
    .unwrap_or_else(|payload| Err(SetOpError::Internal(panic_message(payload.as_ref()))));

    match result {
        Ok(geometry) => {
            log::debug!("{func_name}: result is {}", geometry.geometry_type());
            Ok(geometry)
        }
        Err(err) => {
            let err = GisError::new(func_name, err);
            log::warn!("{err}");
            Err(err)
        }
    }
}

/// Asserts the caller's guarantees: both geometries are in the same coordinate system, matching the SRS.
fn check_contract(srs: Option<&Srs>, g1: &Geometry, g2: &Geometry) {
    let expected = srs.map_or(CoordinateSystem::Cartesian, Srs::coordinate_system);

    assert_eq!(
        g1.coordinate_system(),
        g2.coordinate_system(),
        "geometries must be in the same coordinate system"
    );
    assert_eq!(
        g1.coordinate_system(),
        expected,
        "geometry coordinate system must match the SRS"
    );
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
