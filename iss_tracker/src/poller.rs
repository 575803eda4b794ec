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

//! the location poller: fetches the current ISS position on a fixed cadence and reports
//! [`DerivedLocation`]s to a [`LocationSubscriber`].
//!
//! Polling runs as a single tokio task that performs all fetches sequentially, i.e. there is never
//! more than one request in flight. Each start creates a new generation. Fetch results are only applied
//! (and reported) if their generation is still the current one, which is checked under the same lock
//! that [`LocationPoller::stop`] uses to bump the generation. Once `stop()` returns no result of the
//! stopped session can change state or reach the subscriber anymore.

use std::sync::{Arc,Mutex,MutexGuard};
use async_trait::async_trait;
use reqwest::{Client,header::{ACCEPT,HeaderValue}};
use tokio::{runtime::Handle, task::AbortHandle, time::{interval_at,sleep,timeout,Instant,MissedTickBehavior}};
use tracing::{debug,info,warn,error};

use crate::config::TrackerConfig;
use crate::errors::{IssTrackerError,Result,transport_error};
use crate::location::{DerivedLocation,LocationDeriver};
use crate::sample::{Sample,decode_sample};

/* #region interfaces *************************************************************************************/

/// where samples come from. The HTTP implementation is [`HttpPositionSource`]
#[async_trait]
pub trait PositionSource: Send + Sync + 'static {
    async fn fetch_sample (&self)->Result<Sample>;
}

/// status transitions reported to a [`LocationSubscriber`]
#[derive(Debug,Clone,PartialEq)]
pub enum PollerStatus {
    Started,

    /// a fetch failed, polling continues
    FetchFailed { consecutive: usize, reason: String },

    /// too many consecutive failures, polling has been stopped. This is terminal for the session
    Failed { reason: String },

    /// stopped by the owner of the poller
    Stopped,
}

/// the receiving end of a poller (e.g. a map display).
/// Callbacks are executed while the poller state is locked - implementations should not block
/// and must not call back into the poller
pub trait LocationSubscriber: Send + Sync + 'static {
    fn location_changed (&self, location: &DerivedLocation);

    fn status_changed (&self, status: &PollerStatus) {}
}

/* #endregion interfaces */

/* #region http source ************************************************************************************/

pub struct HttpPositionSource {
    client: Client,
    url: String,
}

impl HttpPositionSource {
    pub fn new (client: Client, url: impl ToString)->Self {
        HttpPositionSource { client, url: url.to_string() }
    }

    pub fn from_config (config: &TrackerConfig)->Result<Self> {
        let mut builder = Client::builder();
        if let Some(dur) = config.request_timeout {
            builder = builder.timeout( dur);
        }
        let client = builder.build().map_err( |e| transport_error!("failed to create http client: {}", e))?;
        Ok( HttpPositionSource::new( client, &config.url) )
    }
}

#[async_trait]
impl PositionSource for HttpPositionSource {
    async fn fetch_sample (&self)->Result<Sample> {
        let response = self.client.get( self.url.as_str())
            .header( ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err( transport_error!("{} returned status {}", self.url, status))
        }

        let bytes = response.bytes().await?;
        decode_sample( &bytes)
    }
}

/* #endregion http source */

/* #region poller *****************************************************************************************/

#[derive(Debug,Default)]
struct PollerState {
    running: bool,
    generation: u64,
    previous: Option<DerivedLocation>,
    n_errors: usize, // consecutive fetch failures
}

/// what is shared between the poller and its polling task
struct PollerCore<S,L> {
    config: TrackerConfig,
    deriver: LocationDeriver,
    source: S,
    subscriber: L,
    state: Mutex<PollerState>,
}

impl<S,L> PollerCore<S,L> where S: PositionSource, L: LocationSubscriber {

    fn lock_state (&self)->MutexGuard<'_,PollerState> {
        // a panicking subscriber does not invalidate our state
        self.state.lock().unwrap_or_else( |poisoned| poisoned.into_inner())
    }

    async fn run (self: Arc<Self>, generation: u64) {
        let config = &self.config;

        // two quick samples so that we have a heading before the coarse polling starts
        let handshake = async {
            if !self.fetch_and_apply( generation).await { return false }
            sleep( config.initial_delay).await;
            self.fetch_and_apply( generation).await
        };

        match timeout( config.handshake_timeout, handshake).await {
            Ok(true) => debug!("initial samples processed"),
            Ok(false) => return,
            Err(_) => warn!("initial samples not complete after {:?}, continue with regular polling", config.handshake_timeout)
        }

        let mut interval = interval_at( Instant::now() + config.poll_interval, config.poll_interval);
        interval.set_missed_tick_behavior( MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if !self.fetch_and_apply( generation).await { break }
        }
        debug!("polling task of generation {} terminated", generation);
    }

    async fn fetch_and_apply (&self, generation: u64)->bool {
        let result = self.source.fetch_sample().await;
        self.apply( generation, result)
    }

    /// process the result of a fetch. Returns false if the session of this generation is over
    fn apply (&self, generation: u64, result: Result<Sample>)->bool {
        let mut state = self.lock_state();

        if !state.running || state.generation != generation {
            debug!("ignoring stale fetch result of generation {}", generation);
            return false
        }

        match result {
            Ok(sample) => {
                let location = self.deriver.derive( &sample, state.previous.as_ref());
                state.n_errors = 0;
                self.subscriber.location_changed( &location);
                state.previous = Some(location);
                true
            }
            Err(e) => {
                state.n_errors += 1;
                let reason = e.to_string();
                warn!("failed to get ISS position ({} consecutive): {}", state.n_errors, reason);
                self.subscriber.status_changed( &PollerStatus::FetchFailed{ consecutive: state.n_errors, reason: reason.clone() });

                if state.n_errors >= self.config.max_failures {
                    // halt first so that a subscriber reacting to Failed sees a stopped poller
                    state.running = false;
                    state.generation += 1;
                    error!("giving up after {} consecutive failures", state.n_errors);
                    self.subscriber.status_changed( &PollerStatus::Failed{ reason });
                    false
                } else {
                    true
                }
            }
        }
    }
}

/// the location data source. Owns the polling task
pub struct LocationPoller<S,L> where S: PositionSource, L: LocationSubscriber {
    core: Arc<PollerCore<S,L>>,
    task: Option<AbortHandle>,
}

impl<S,L> LocationPoller<S,L> where S: PositionSource, L: LocationSubscriber {

    pub fn new (config: TrackerConfig, source: S, subscriber: L)->Self {
        let deriver = config.deriver();
        let state = Mutex::new( PollerState::default());
        let core = Arc::new( PollerCore { config, deriver, source, subscriber, state });
        LocationPoller { core, task: None }
    }

    /// start polling. This is a no-op if we are already running. Has to be called from within a tokio runtime
    pub fn start (&mut self)->Result<()> {
        let handle = Handle::try_current().map_err( |e| IssTrackerError::RuntimeError( e.to_string()))?;

        let generation = {
            let mut state = self.core.lock_state();
            if state.running {
                debug!("poller already running");
                return Ok(())
            }

            state.running = true;
            state.generation += 1;
            state.previous = None;
            state.n_errors = 0;
            self.core.subscriber.status_changed( &PollerStatus::Started);
            state.generation
        };

        // a task that terminated itself (too many failures) might still be around
        if let Some(task) = self.task.take() { task.abort() }

        info!("start polling {} every {:?}", self.core.config.url, self.core.config.poll_interval);
        let core = self.core.clone();
        let jh = handle.spawn( core.run( generation));
        self.task = Some( jh.abort_handle());

        Ok(())
    }

    /// stop polling and discard the session state. Results of requests that are still outstanding are ignored
    pub fn stop (&mut self) {
        let mut state = self.core.lock_state();

        if let Some(task) = self.task.take() { task.abort() }

        // a session that ended with Failed still has its last location and error count
        state.previous = None;
        state.n_errors = 0;

        if state.running {
            state.running = false;
            state.generation += 1;
            info!("polling stopped");
            self.core.subscriber.status_changed( &PollerStatus::Stopped);
        }
    }

    pub fn is_running (&self)->bool { self.core.lock_state().running }

    /// number of consecutive fetch failures in the current (or last) session
    pub fn error_count (&self)->usize { self.core.lock_state().n_errors }

    pub fn previous_location (&self)->Option<DerivedLocation> { self.core.lock_state().previous.clone() }

    pub fn config (&self)->&TrackerConfig { &self.core.config }
    pub fn source (&self)->&S { &self.core.source }
    pub fn subscriber (&self)->&L { &self.core.subscriber }
}

impl<S,L> Drop for LocationPoller<S,L> where S: PositionSource, L: LocationSubscriber {
    fn drop (&mut self) {
        if let Some(task) = self.task.take() { task.abort() }
    }
}

/* #endregion poller */

/* #region channel subscriber *****************************************************************************/

#[derive(Debug,Clone,PartialEq)]
pub enum PollerEvent {
    Location(DerivedLocation),
    Status(PollerStatus),
}

/// a subscriber that forwards everything into an unbounded tokio channel so that it can be
/// processed asynchronously by the receiver
pub struct ChannelSubscriber {
    tx: tokio::sync::mpsc::UnboundedSender<PollerEvent>
}

impl ChannelSubscriber {
    pub fn new ()->(Self, tokio::sync::mpsc::UnboundedReceiver<PollerEvent>) {
        let (tx,rx) = tokio::sync::mpsc::unbounded_channel();
        (ChannelSubscriber{tx}, rx)
    }
}

impl LocationSubscriber for ChannelSubscriber {
    fn location_changed (&self, location: &DerivedLocation) {
        if self.tx.send( PollerEvent::Location( location.clone())).is_err() {
            debug!("location receiver closed");
        }
    }

    fn status_changed (&self, status: &PollerStatus) {
        if self.tx.send( PollerEvent::Status( status.clone())).is_err() {
            debug!("status receiver closed");
        }
    }
}

/* #endregion channel subscriber */
