//! # VE.Direct Serial Streams
//!
//! Glue between an async byte source and a [`FrameDecoder`]. The decoder
//! does not care where bytes come from; [`pump`] drains any
//! `tokio::io::AsyncRead`, and [`open_serial`] opens the 19200 8N1 port most
//! devices use.

use std::time::Duration;

use log::{debug, info};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio_serial::{SerialPortBuilderExt, SerialStream};

use crate::constants::{VEDIRECT_BAUDRATE, VEDIRECT_READ_TIMEOUT};
use crate::error::VeDirectError;
use crate::vedirect::clock::Clock;
use crate::vedirect::decoder::FrameDecoder;

const READ_CHUNK: usize = 256;

/// Configuration for serial connection.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    pub baudrate: u32,
    pub timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        SerialConfig {
            baudrate: VEDIRECT_BAUDRATE,
            timeout: VEDIRECT_READ_TIMEOUT,
        }
    }
}

/// Opens a serial port with VE.Direct line settings (8 data bits, no
/// parity, one stop bit).
pub fn open_serial(port_name: &str, config: &SerialConfig) -> Result<SerialStream, VeDirectError> {
    let port = tokio_serial::new(port_name, config.baudrate)
        .data_bits(tokio_serial::DataBits::Eight)
        .stop_bits(tokio_serial::StopBits::One)
        .parity(tokio_serial::Parity::None)
        .flow_control(tokio_serial::FlowControl::None)
        .timeout(config.timeout)
        .open_native_async()?;
    info!("Opened {port_name} at {} baud", config.baudrate);
    Ok(port)
}

/// Feeds everything `reader` yields into `decoder` until end of stream.
///
/// Returns the number of bytes fed.
pub async fn pump<R, C>(reader: &mut R, decoder: &mut FrameDecoder<C>) -> Result<u64, VeDirectError>
where
    R: AsyncRead + Unpin,
    C: Clock,
{
    let mut buf = [0u8; READ_CHUNK];
    let mut total = 0u64;
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            debug!("Byte source closed after {total} bytes");
            return Ok(total);
        }
        decoder.feed_slice(&buf[..n]);
        total += n as u64;
    }
}
