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

use std::{path::Path,time::Duration};
use serde::{Serialize,Deserialize};
use iss_common::{
    config::load_config_path,
    datetime::{millis, secs, deserialize_duration, serialize_duration, deserialize_optional_duration, serialize_optional_duration}
};
use crate::{ISS_NOW_URL, location::{ISS_ALTITUDE, ISS_DEFAULT_VELOCITY, LocationDeriver}};
use crate::errors::{Result, op_failed};

/// default radius of the area from which the ISS is visible, in meters
pub const FOOTPRINT_RADIUS: f64 = 2_200_000.0;

#[derive(Deserialize,Serialize,Debug,Clone)]
#[serde(default)]
pub struct TrackerConfig {
    pub url: String,

    /// cadence of steady state polling
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub poll_interval: Duration,

    /// delay between the two initial samples that establish a heading
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub initial_delay: Duration,

    /// upper bound for the two initial samples, after which we start regular polling regardless
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub handshake_timeout: Duration,

    /// per request timeout. If not set we rely on the transport defaults
    #[serde(deserialize_with="deserialize_optional_duration", serialize_with="serialize_optional_duration")]
    pub request_timeout: Option<Duration>,

    /// number of consecutive fetch failures after which polling stops
    pub max_failures: usize,

    pub altitude: f64,          // meters, assigned to all positions
    pub default_velocity: f64,  // m/s, reported for the first location

    /// time without updates after which the ground track starts a new part
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub track_gap: Duration,

    /// radius of the visibility footprint in meters. If not set we use the horizon distance for `altitude`
    pub footprint_radius: Option<f64>,
    pub footprint_segments: usize,
}

impl Default for TrackerConfig {
    fn default()->Self {
        TrackerConfig {
            url: ISS_NOW_URL.to_string(),
            poll_interval: secs(5),
            initial_delay: millis(1500),
            handshake_timeout: secs(10),
            request_timeout: None,
            max_failures: 5,
            altitude: ISS_ALTITUDE,
            default_velocity: ISS_DEFAULT_VELOCITY,
            track_gap: secs(10),
            footprint_radius: Some(FOOTPRINT_RADIUS),
            footprint_segments: 72,
        }
    }
}

impl TrackerConfig {
    pub fn deriver (&self)->LocationDeriver {
        LocationDeriver::new( self.altitude, self.default_velocity)
    }

    /// check values that would otherwise lead to panics or a poller that can never fail
    pub fn validate (&self)->Result<()> {
        if self.poll_interval.is_zero() { return Err( op_failed!("poll_interval must not be zero")) }
        if self.max_failures == 0 { return Err( op_failed!("max_failures must be at least 1")) }
        if self.footprint_segments < 3 { return Err( op_failed!("footprint_segments must be at least 3, got {}", self.footprint_segments)) }
        if self.url.is_empty() { return Err( op_failed!("no url")) }
        Ok(())
    }

    /// load and validate a RON config file
    pub fn load<P: AsRef<Path>> (path: P)->Result<Self> {
        let config: TrackerConfig = load_config_path( path)?;
        config.validate()?;
        Ok(config)
    }
}
