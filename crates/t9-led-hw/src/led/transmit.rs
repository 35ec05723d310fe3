//! Paced frame transmission.
//!
//! The controller only latches a byte reliably if it is followed by a short
//! pause, so frames are written one byte at a time with `BYTE_DELAY` between
//! bytes. The checksum byte is written last with no pause after it.

use super::frame::{Frame, FRAME_LEN};
use crate::{Error, Result};
use std::time::Duration;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Pause after each of the first four frame bytes.
pub const BYTE_DELAY: Duration = Duration::from_millis(5);

/// Writes `frame` to `channel` byte by byte, honoring the inter-byte delay.
///
/// Aborts on the first failed write. Bytes already sent have taken effect on
/// the device; nothing is retried or rolled back.
pub async fn transmit<W>(channel: &mut W, frame: &Frame) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    debug!("Sending LED frame: {:02X?}", frame.as_bytes());

    for (sent, &byte) in frame.as_bytes().iter().enumerate() {
        write_byte(channel, byte)
            .await
            .map_err(|source| Error::Transmission { sent, source })?;
        debug!("  -> sent {:02X}", byte);

        if sent + 1 < FRAME_LEN {
            tokio::time::sleep(BYTE_DELAY).await;
        }
    }

    debug!("LED frame sent successfully");
    Ok(())
}

async fn write_byte<W>(channel: &mut W, byte: u8) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    channel.write_all(&[byte]).await?;
    channel.flush().await
}
