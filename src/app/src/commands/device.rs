//! Device command definitions.
//!
//! These types define the interface between the Core and the Shell for the
//! device connection. The Shell owns the transport and the wire encoding.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use crate::types::Config;

// Operations the Shell performs on the connected device
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceOperation {
    SetConfig { connection_id: u32, config: Config },
}

// What the Shell reports back once the device handled the operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceOutput {
    Completed,
    Failed { message: String },
}

impl Operation for DeviceOperation {
    type Output = DeviceOutput;
}

impl From<DeviceOutput> for Result<(), String> {
    fn from(output: DeviceOutput) -> Self {
        match output {
            DeviceOutput::Completed => Ok(()),
            DeviceOutput::Failed { message } => Err(message),
        }
    }
}

/// Command-based device API
pub struct Device<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Device<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DeviceOperation>> + 'static,
    Event: Send + 'static,
{
    /// Write a configuration section to the device behind `connection_id`
    pub fn set_config(connection_id: u32, config: Config) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DeviceOperation::SetConfig {
            connection_id,
            config,
        })
    }
}

/// Request builder for device operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: DeviceOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DeviceOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: DeviceOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DeviceOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
