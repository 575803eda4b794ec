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

use thiserror::Error;

pub type Result<T> = std::result::Result<T,IssTrackerError>;

#[derive(Error,Debug)]
pub enum IssTrackerError {

    /// the request itself failed (connection, timeout, non-2xx status)
    #[error("transport error: {0}")]
    TransportError(String),

    /// the response body was not the expected JSON shape
    #[error("decode error: {0}")]
    DecodeError(String),

    #[error("config error {0}")]
    ConfigError( #[from] iss_common::config::ConfigError),

    #[error("runtime error {0}")]
    RuntimeError(String),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

impl From<reqwest::Error> for IssTrackerError {
    fn from (e: reqwest::Error)->Self {
        if e.is_decode() {
            IssTrackerError::DecodeError( e.to_string())
        } else {
            IssTrackerError::TransportError( e.to_string())
        }
    }
}

impl From<serde_json::Error> for IssTrackerError {
    fn from (e: serde_json::Error)->Self {
        IssTrackerError::DecodeError( e.to_string())
    }
}

macro_rules! transport_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::IssTrackerError::TransportError( format!( $fmt $(, $arg)* ))
    };
}
pub(crate) use transport_error;

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::IssTrackerError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub(crate) use op_failed;
