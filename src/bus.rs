//! Register transactions over an I2C bus.
//!
//! [`Bus`] owns one bus implementation plus the peripheral address it talks
//! to. Register reads are two separate transfers, address first and data
//! second, so a failure can be pinned on the phase that caused it. Nothing
//! here retries; every failure goes straight back to the caller.

use embedded_hal::i2c::I2c;
use log::trace;

use crate::{address::Address, error::BusError};

/// Longest single transfer, register byte included.
pub const MAX_TRANSFER_LEN: usize = 255;

/// An open connection to one peripheral.
///
/// Closing is idempotent; dropping the `Bus` closes it as well.
pub struct Bus<I>
where
    I: I2c,
{
    i2c: Option<I>,
    address: u8,
}

impl<I> Bus<I>
where
    I: I2c,
{
    pub fn new(i2c: I, address: Address) -> Self {
        Self {
            i2c: Some(i2c),
            address: address.into(),
        }
    }

    pub fn address(&self) -> Address {
        Address(self.address)
    }

    pub fn is_open(&self) -> bool {
        self.i2c.is_some()
    }

    /// Releases the underlying bus. A second call does nothing.
    pub fn close(&mut self) {
        if self.i2c.take().is_some() {
            trace!("i2c {:#04x}: closed", self.address);
        }
    }

    /// Returns the underlying I2C peripheral, consuming this handle.
    /// `None` if the handle was already closed.
    pub fn release(mut self) -> Option<I> {
        self.i2c.take()
    }

    fn i2c(&mut self) -> Result<&mut I, BusError<I::Error>> {
        self.i2c.as_mut().ok_or(BusError::Closed)
    }

    /// Writes `data` without a register prefix.
    pub fn write(&mut self, data: &[u8]) -> Result<usize, BusError<I::Error>> {
        if data.len() > MAX_TRANSFER_LEN {
            return Err(BusError::TransferTooLong {
                len: data.len(),
                max: MAX_TRANSFER_LEN,
            });
        }
        let address = self.address;
        self.i2c()?
            .write(address, data)
            .map_err(BusError::TransactionWrite)?;
        Ok(data.len())
    }

    /// Fills `buf` without addressing a register first.
    pub fn read<'a>(&mut self, buf: &'a mut [u8]) -> Result<&'a [u8], BusError<I::Error>> {
        if buf.len() > MAX_TRANSFER_LEN {
            return Err(BusError::TransferTooLong {
                len: buf.len(),
                max: MAX_TRANSFER_LEN,
            });
        }
        let address = self.address;
        self.i2c()?
            .read(address, buf)
            .map_err(BusError::TransactionRead)?;
        Ok(buf)
    }

    /// Writes `reg` followed by `data` as one transfer.
    ///
    /// Returns the number of payload bytes written, the register byte not
    /// counted.
    pub fn write_register(
        &mut self,
        reg: impl Into<u8>,
        data: &[u8],
    ) -> Result<usize, BusError<I::Error>> {
        let reg = reg.into();
        let len = data.len() + 1;
        if len > MAX_TRANSFER_LEN {
            return Err(BusError::TransferTooLong {
                len,
                max: MAX_TRANSFER_LEN,
            });
        }

        let mut frame = [0; MAX_TRANSFER_LEN];
        frame[0] = reg;
        frame[1..len].copy_from_slice(data);

        trace!("i2c {:#04x}: write {:#04x} <- {:02x?}", self.address, reg, data);
        self.write(&frame[..len])?;
        Ok(data.len())
    }

    /// Reads `buf.len()` bytes starting at `reg`.
    ///
    /// The register address goes out on its own first; the read is only
    /// issued once that write has succeeded.
    pub fn read_registers<'a>(
        &mut self,
        reg: impl Into<u8>,
        buf: &'a mut [u8],
    ) -> Result<&'a [u8], BusError<I::Error>> {
        let reg = reg.into();
        if buf.len() > MAX_TRANSFER_LEN {
            return Err(BusError::TransferTooLong {
                len: buf.len(),
                max: MAX_TRANSFER_LEN,
            });
        }

        self.write(&[reg])?;
        let data = self.read(buf)?;
        trace!("i2c {:#04x}: read {:#04x} -> {:02x?}", self.address, reg, data);
        Ok(data)
    }

    pub fn read_register(&mut self, reg: impl Into<u8>) -> Result<u8, BusError<I::Error>> {
        let mut buf = [0; 1];
        self.read_registers(reg, &mut buf)?;
        Ok(buf[0])
    }

    /// Burst read of `N` consecutive registers into a fixed-size array.
    pub fn read_array<const N: usize>(
        &mut self,
        reg: impl Into<u8>,
    ) -> Result<[u8; N], BusError<I::Error>> {
        let mut buf = [0; N];
        self.read_registers(reg, &mut buf)?;
        Ok(buf)
    }
}
