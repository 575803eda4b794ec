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

use std::time::Duration;
use geo_types::{Coord,LineString,MultiLineString};
use iss_common::if_let;
use crate::location::DerivedLocation;

/// the ground track of the ISS as a multi-part line.
///
/// Reported longitudes are normalized into [-180,180]. To get a continuous line that does not jump
/// from 179.9 to -179.9 we denormalize them: the ISS always moves eastwards (prograde orbit), hence a
/// new longitude that is west of the last track point means we crossed the antimeridian and all
/// subsequent points are shifted by another 360 degrees.
/// If there was no update for longer than `gap` (API outage, suspended client) a new part is started.
#[derive(Debug,Clone)]
pub struct GroundTrack {
    gap: Duration,
    parts: Vec<Vec<Coord<f64>>>,
    turns: i32,                  // number of antimeridian crossings so far
    last_timestamp: Option<f64>,
}

impl GroundTrack {
    pub fn new (gap: Duration)->Self {
        GroundTrack { gap, parts: Vec::new(), turns: 0, last_timestamp: None }
    }

    /// add a location, returns true if this started a new part
    pub fn add (&mut self, location: &DerivedLocation)->bool {
        let lon = location.position.longitude;
        let lat = location.position.latitude;

        let leave_gap = match self.last_timestamp {
            Some(t_last) => location.timestamp - t_last > self.gap.as_secs_f64(),
            None => false
        };

        if_let! {
            Some(last_part) = self.parts.last(),
            Some(last) = last_part.last() => {
                if lon + 360.0 * (self.turns as f64) < last.x {
                    self.turns += 1;
                }
            }
        }

        let coord = Coord { x: lon + 360.0 * (self.turns as f64), y: lat };
        let new_part = leave_gap || self.parts.is_empty();
        if new_part {
            self.parts.push( vec![coord]);
        } else if let Some(part) = self.parts.last_mut() {
            part.push( coord);
        }

        self.last_timestamp = Some(location.timestamp);
        new_part
    }

    pub fn parts (&self)->&[Vec<Coord<f64>>] { &self.parts }

    pub fn n_parts (&self)->usize { self.parts.len() }

    pub fn n_points (&self)->usize { self.parts.iter().map( |p| p.len()).sum() }

    pub fn antimeridian_crossings (&self)->i32 { self.turns }

    pub fn last_point (&self)->Option<Coord<f64>> {
        self.parts.last().and_then( |p| p.last().copied())
    }

    pub fn to_multi_line_string (&self)->MultiLineString<f64> {
        MultiLineString::new( self.parts.iter().map( |p| LineString::new( p.clone())).collect())
    }

    pub fn clear (&mut self) {
        self.parts.clear();
        self.turns = 0;
        self.last_timestamp = None;
    }
}
