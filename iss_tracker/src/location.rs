/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use chrono::{DateTime,Utc};
use geo::{Bearing, Distance, Geodesic, Point};
use serde::{Serialize,Deserialize};
use iss_common::{angle::normalize_360, datetime::from_epoch_secs_f64};
use crate::sample::Sample;

/// altitude we assign to all positions. The API does not report it, the ISS orbit
/// oscillates between roughly 400 and 420km
pub const ISS_ALTITUDE: f64 = 407_000.0;

/// typical orbital speed of the ISS in m/s, reported until we have two samples to compute it
pub const ISS_DEFAULT_VELOCITY: f64 = 7666.0;

/// a WGS84 position with altitude in meters
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct GeoPoint3 {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

impl GeoPoint3 {
    pub fn new (longitude: f64, latitude: f64, altitude: f64)->Self {
        GeoPoint3 { longitude, latitude, altitude }
    }

    /// the 2D surface point (x = longitude, y = latitude)
    pub fn point (&self)->Point<f64> { Point::new( self.longitude, self.latitude) }
}

/// a position update with dead-reckoning information
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct DerivedLocation {
    pub position: GeoPoint3,
    pub timestamp: f64, // epoch seconds
    pub velocity: f64,  // m/s
    pub course: f64,    // degrees, clockwise from north

    /// set for the first location of a session, i.e. velocity and course are just placeholders
    pub is_first: bool,
}

impl DerivedLocation {
    pub fn date (&self)->Option<DateTime<Utc>> {
        from_epoch_secs_f64( self.timestamp)
    }
}

/// geodesic (WGS84) distance in meters and initial bearing in degrees [0,360) from `from` to `to`
pub fn geodesic_distance_and_bearing (from: Point<f64>, to: Point<f64>)->(f64,f64) {
    let dist = Geodesic.distance( from, to);
    let bearing = normalize_360( Geodesic.bearing( from, to));
    (dist, bearing)
}

/// turns samples into locations by finite-differencing with the previous location
#[derive(Debug,Clone,Copy)]
pub struct LocationDeriver {
    pub altitude: f64,
    pub default_velocity: f64,
}

impl Default for LocationDeriver {
    fn default()->Self {
        LocationDeriver { altitude: ISS_ALTITUDE, default_velocity: ISS_DEFAULT_VELOCITY }
    }
}

impl LocationDeriver {
    pub fn new (altitude: f64, default_velocity: f64)->Self {
        LocationDeriver { altitude, default_velocity }
    }

    pub fn derive (&self, sample: &Sample, previous: Option<&DerivedLocation>)->DerivedLocation {
        let position = GeoPoint3::new( sample.position.longitude, sample.position.latitude, self.altitude);
        let timestamp = sample.timestamp;

        let (velocity,course) = match previous {
            Some(prev) => {
                let dt = timestamp - prev.timestamp;
                if dt > 0.0 {
                    let (dist,bearing) = geodesic_distance_and_bearing( prev.position.point(), position.point());
                    // a repeated position has no direction, keep the last one
                    let course = if dist > 0.0 { bearing } else { prev.course };
                    (dist / dt, course)
                } else {
                    // out of order or duplicated timestamp - nothing we can difference
                    (prev.velocity, prev.course)
                }
            }
            None => (self.default_velocity, 0.0)
        };

        DerivedLocation { position, timestamp, velocity, course, is_first: previous.is_none() }
    }
}

/// derive with the default ISS altitude and velocity
pub fn derive_location (sample: &Sample, previous: Option<&DerivedLocation>)->DerivedLocation {
    LocationDeriver::default().derive( sample, previous)
}
