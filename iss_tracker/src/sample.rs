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

//! the JSON payload returned by the position API, e.g.
//! ```json
//! {
//!     "timestamp": 1557499056,
//!     "message": "success",
//!     "iss_position": {
//!         "latitude": "-47.7396",
//!         "longitude": "39.7870"
//!     }
//! }
//! ```
//! Coordinates are transmitted as decimal strings. Unknown fields are ignored. Both the payload and
//! `iss_position` have to be JSON objects, serde's positional (array) form is not accepted.

use serde::{Deserialize,Deserializer,Serialize};
use serde_json::Value;
use crate::errors::{IssTrackerError,Result};

/// sub-satellite point in WGS84 degrees. Values are taken as reported, no range check
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct RawPosition {
    #[serde(deserialize_with="deserialize_decimal_string")]
    pub latitude: f64,

    #[serde(deserialize_with="deserialize_decimal_string")]
    pub longitude: f64,
}

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Sample {
    /// unix epoch seconds
    pub timestamp: f64,

    #[serde(rename="iss_position")]
    pub position: RawPosition,
}

impl Sample {
    pub fn new (timestamp: f64, latitude: f64, longitude: f64)->Self {
        Sample { timestamp, position: RawPosition { latitude, longitude } }
    }
}

/// decode a response body. Anything that is not the expected shape is a `DecodeError`
pub fn decode_sample (bytes: &[u8])->Result<Sample> {
    let value: Value = serde_json::from_slice( bytes)?;
    check_object( &value, "response")?;
    check_object( &value["iss_position"], "iss_position")?;
    Ok( Sample::deserialize( value)? )
}

fn check_object (value: &Value, what: &str)->Result<()> {
    if value.is_object() {
        Ok(())
    } else {
        Err( IssTrackerError::DecodeError( format!("{what} is not a JSON object: {value}")))
    }
}

fn deserialize_decimal_string<'a,D> (deserializer: D)->std::result::Result<f64,D::Error> where D: Deserializer<'a> {
    let s = String::deserialize( deserializer)?;
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err( serde::de::Error::custom( format!("not a decimal number: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let input = r#"{"timestamp": 1557499056, "message": "success", "iss_position": {"latitude": "-47.7396", "longitude": "39.7870"}}"#;
        let sample = decode_sample( input.as_bytes()).unwrap();
        assert_eq!( sample, Sample::new( 1557499056.0, -47.7396, 39.7870));
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let input = r#"{"timestamp": 1557499056, "iss_position": {"latitude": "north", "longitude": "39.7870"}}"#;
        match decode_sample( input.as_bytes()) {
            Err(IssTrackerError::DecodeError(msg)) => assert!( msg.contains("north")),
            other => panic!("expected decode error, got {other:?}")
        }
    }

    #[test]
    fn test_positional_form_rejected() {
        for input in [r#"[1557499056, ["-47.7396","39.7870"]]"#, r#"{"timestamp":1557499056,"iss_position":["-47.7396","39.7870"]}"#] {
            match decode_sample( input.as_bytes()) {
                Err(IssTrackerError::DecodeError(msg)) => assert!( msg.contains("not a JSON object")),
                other => panic!("expected decode error for {input}, got {other:?}")
            }
        }
    }
}
