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
use serde::{Deserialize,Serializer,Deserializer};
use std::time::Duration;
use parse_duration::parse;

// simple Duration ctors that read better in config defaults and timer code
#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }

/// convert fractional epoch seconds into a DateTime. Returns None if out of range or not finite
pub fn from_epoch_secs_f64 (secs: f64)->Option<DateTime<Utc>> {
    if !secs.is_finite() { return None }

    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round() as u32;
    DateTime::<Utc>::from_timestamp( whole as i64, nanos.min(999_999_999))
}

/* #region serde support for human readable durations ("5s", "1500ms", "2min") ***************************/

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn deserialize_optional_duration <'a,D>(deserializer: D) -> Result<Option<Duration>,D::Error> 
    where D: Deserializer<'a>
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    if let Some(s) = s {
        let d =  parse(s.as_str()).map_err( |e| serde::de::Error::custom(format!("{:?}",e)))?;
        return Ok( Some(d) )
    }

    Ok(None)
}

// we always serialize as integer milliseconds so that the output can be parsed back
pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_str( &format!("{}ms", dur.as_millis()))
}

pub fn serialize_optional_duration<S>(dur: &Option<Duration>, s: S) -> Result<S::Ok, S::Error>
    where S: Serializer,
{
    match dur {
        Some(d) => s.serialize_some( &format!("{}ms", d.as_millis())),
        None => s.serialize_none()
    }
}

/* #endregion serde support */
