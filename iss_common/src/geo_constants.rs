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

//! common geodetic constants that should be consistent throughout the tracker crates

/// mean earth radius in meters
pub const MEAN_EARTH_RADIUS: f64 = 6371000.0; 

/// semi major axis in meters
pub const EQATORIAL_EARTH_RADIUS: f64 = 6378137.0; 

/// length of one degree of longitude on the equator in meters (WGS84)
pub const EQUATOR_DEGREE_LENGTH: f64 = EQATORIAL_EARTH_RADIUS * std::f64::consts::PI / 180.0;

/// great circle distance in meters from the sub-satellite point to the geometric horizon for an
/// object at `altitude` meters (spherical earth approximation)
pub fn horizon_ground_distance (altitude: f64)->f64 {
    if altitude <= 0.0 { return 0.0 }
    MEAN_EARTH_RADIUS * (MEAN_EARTH_RADIUS / (MEAN_EARTH_RADIUS + altitude)).acos()
}
